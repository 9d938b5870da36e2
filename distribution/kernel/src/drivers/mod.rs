//! MultiOS Device Drivers Module
//! 
//! This module provides device driver management and initialization.

use crate::log::{info, warn, error};

/// Driver initialization
pub fn init() -> Result<(), crate::KernelError> {
    info!("Initializing device drivers...");
    
    // Initialize graphics subsystem first
    graphics::init()?;
    
    // Initialize framebuffer manager
    framebuffer::init()?;
    
    // Initialize font and text rendering system
    bitmap_font::init()?;
    
    // Initialize graphics utilities
    graphics_utils::init()?;
    
    // Initialize keyboard driver
    keyboard::init_keyboard();
    
    info!("Device drivers initialized successfully");
    Ok(())
}

/// Graphics driver module
pub mod graphics {
    pub use super::graphics::*;
}

/// Framebuffer management module
pub mod framebuffer {
    pub use super::framebuffer::*;
}

/// Bitmap font and text rendering module
pub mod bitmap_font {
    pub use super::bitmap_font::*;
}

/// Graphics utilities and advanced operations module
pub mod graphics_utils {
    pub use super::graphics_utils::*;
}

/// Driver types
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum DriverType {
    Block = 0,
    Character = 1,
    Network = 2,
    Audio = 3,
    Graphics = 4,
    Input = 5,
}

/// Driver state
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum DriverState {
    Unloaded = 0,
    Loaded = 1,
    Active = 2,
    Error = 3,
}

/// Driver information
#[derive(Debug, Clone)]
pub struct DriverInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub driver_type: DriverType,
    pub state: DriverState,
    pub capabilities: u32,
}

/// Keyboard driver
pub mod keyboard {
    use crate::log::{info, warn, error};
    
    /// Initialize keyboard driver
    pub fn init_keyboard() {
        info!("Initializing keyboard driver...");
        
        // Initialize PS/2 keyboard or USB keyboard
        
        info!("Keyboard driver initialized");
    }
    
    /// Read keycode from keyboard
    pub fn read_keycode() -> Option<u8> {
        // Read keycode from keyboard controller
        // This is a stub implementation
        None
    }
    
    /// Process keycode and convert to character
    pub fn process_keycode(keycode: u8) {
        info!("Processing keycode: {:#x}", keycode);
        
        // Convert keycode to character
        // Handle special keys (shift, ctrl, etc.)
        // Place input in keyboard buffer
    }
}