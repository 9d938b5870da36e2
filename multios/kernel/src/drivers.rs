//! Device drivers module
//! 
//! This module provides device driver functionality.

use crate::KernelResult;
use log::debug;

/// Device types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Keyboard,
    Mouse,
    Serial,
    Network,
    Disk,
    Sound,
    Graphics,
    Usb,
    Unknown,
}

/// Device information
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub device_type: DeviceType,
    pub name: &'static str,
    pub driver_version: &'static str,
    pub initialized: bool,
}

/// Initialize device drivers
pub fn init() -> KernelResult<()> {
    debug!("Initializing device drivers...");
    
    // TODO: Implement driver initialization
    // - Detect hardware devices
    // - Load appropriate drivers
    // - Initialize device controllers
    
    debug!("Device drivers initialized");
    
    Ok(())
}

/// Register a device driver
pub fn register_driver(_device_type: DeviceType, _driver_name: &str) -> KernelResult<()> {
    debug!("Registering driver for {:?}", _device_type);
    
    // TODO: Implement driver registration
    Ok(())
}

/// Unregister a device driver
pub fn unregister_driver(_device_type: DeviceType) -> KernelResult<()> {
    debug!("Unregistering driver for {:?}", _device_type);
    
    // TODO: Implement driver unregistration
    Ok(())
}

/// Get list of detected devices
pub fn get_detected_devices() -> Vec<DeviceInfo> {
    vec![
        DeviceInfo {
            device_type: DeviceType::Keyboard,
            name: "PS/2 Keyboard",
            driver_version: "1.0",
            initialized: true,
        },
        DeviceInfo {
            device_type: DeviceType::Serial,
            name: "16550 UART",
            driver_version: "1.0",
            initialized: true,
        },
    ]
}

/// Reset device
pub fn reset_device(_device_type: DeviceType) -> KernelResult<()> {
    debug!("Resetting {:?} device", _device_type);
    
    // TODO: Implement device reset
    Ok(())
}

/// Enable device
pub fn enable_device(_device_type: DeviceType) -> KernelResult<()> {
    debug!("Enabling {:?} device", _device_type);
    
    // TODO: Implement device enable
    Ok(())
}

/// Disable device
pub fn disable_device(_device_type: DeviceType) -> KernelResult<()> {
    debug!("Disabling {:?} device", _device_type);
    
    // TODO: Implement device disable
    Ok(())
}
