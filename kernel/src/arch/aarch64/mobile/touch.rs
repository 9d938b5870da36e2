//! ARM64 Mobile Touch Interface Support
//! 
//! This module provides comprehensive touch interface support for ARM64 mobile devices,
//! including multi-touch handling, gesture recognition, touch calibration, and
//! various touch controller interfaces.

use crate::log::{info, warn, error};
use crate::KernelError;

/// Touch event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TouchEventType {
    Down = 0,    // Touch started
    Move = 1,    // Touch moved
    Up = 2,      // Touch ended
    Cancel = 3,  // Touch cancelled
}

/// Touch gesture types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TouchGesture {
    Tap = 0,
    DoubleTap = 1,
    LongPress = 2,
    Pinch = 3,
    Pan = 4,
    Fling = 5,
    Rotate = 6,
    TwoFingerTap = 7,
}

/// Touch point information
#[derive(Debug, Clone, Copy)]
pub struct TouchPoint {
    pub id: u32,         // Unique touch identifier
    pub x: i32,          // X coordinate
    pub y: i32,          // Y coordinate
    pub pressure: u8,    // Touch pressure (0-255)
    pub size: u16,       // Touch size/area
    pub timestamp: u64,  // Timestamp in ticks
}

/// Touch event
#[derive(Debug, Clone)]
pub struct TouchEvent {
    pub event_type: TouchEventType,
    pub points: [TouchPoint; 10], // Support up to 10 touches
    pub point_count: u8,
    pub timestamp: u64,
}

/// Touch controller interface types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TouchControllerType {
    I2C = 0,        // I2C-based controller
    SPI = 1,        // SPI-based controller
    USB = 2,        // USB-based controller
    HID = 3,        // HID over I2C/SPI
    Platform = 4,   // Platform-specific controller
}

/// Touch controller capabilities
#[derive(Debug, Clone, Copy)]
pub struct TouchCapabilities {
    pub max_touches: u8,           // Maximum supported touch points
    pub resolution_x: u16,         // X-axis resolution
    pub resolution_y: u16,         // Y-axis resolution
    pub pressure_support: bool,    // Pressure sensing support
    pub size_support: bool,        // Touch size reporting
    pub gesture_support: bool,     // Built-in gesture recognition
    pub calibration_support: bool, // Hardware calibration
    pub power_management: bool,    // Power management features
}

/// Touch gesture detection state
#[derive(Debug, Clone)]
pub struct GestureState {
    pub active_gestures: [TouchGesture; 10],
    pub gesture_points: [TouchPoint; 10],
    pub gesture_start_time: u64,
    pub last_gesture_time: u64,
    pub gesture_confidence: f32, // 0.0 to 1.0
}

/// Touch interface configuration
#[derive(Debug, Clone)]
pub struct TouchConfig {
    pub controller_type: TouchControllerType,
    pub capabilities: TouchCapabilities,
    pub display_mapping: TouchMapping,
    pub gesture_config: GestureConfig,
}

/// Touch-to-display mapping
#[derive(Debug, Clone, Copy)]
pub struct TouchMapping {
    pub screen_width: i32,
    pub screen_height: i32,
    pub touch_width: i32,
    pub touch_height: i32,
    pub orientation: TouchOrientation,
}

/// Touch orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TouchOrientation {
    Portrait = 0,
    Landscape = 1,
    PortraitInverted = 2,
    LandscapeInverted = 3,
}

/// Gesture configuration
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    pub tap_timeout_ms: u32,       // Timeout for tap detection
    pub long_press_timeout_ms: u32, // Timeout for long press
    pub fling_velocity_threshold: f32, // Velocity threshold for fling
    pub pinch_threshold: f32,      // Distance threshold for pinch
    pub multi_touch_timeout_ms: u32, // Multi-touch timeout
}

/// Initialize touch interface
pub fn init_touch_interface() -> Result<(), KernelError> {
    info!("Initializing touch interface...");
    
    // Detect touch controller
    let controller_type = detect_touch_controller()?;
    
    // Get touch capabilities
    let capabilities = get_touch_capabilities()?;
    
    // Configure touch interface
    let config = configure_touch_interface(controller_type, capabilities)?;
    
    // Initialize touch controller
    init_touch_controller(&config)?;
    
    // Set up touch event handling
    setup_touch_event_handling()?;
    
    // Initialize gesture recognition
    init_gesture_recognition()?;
    
    // Calibrate touch interface
    calibrate_touch_interface()?;
    
    info!("Touch interface initialized successfully");
    Ok(())
}

/// Detect touch controller type
fn detect_touch_controller() -> Result<TouchControllerType, KernelError> {
    info!("Detecting touch controller...");
    
    // This would probe for touch controllers on common interfaces:
    // 1. I2C bus scanning for known touch controller addresses
    // 2. SPI interface detection
    // 3. USB HID enumeration
    // 4. Platform-specific detection methods
    
    // For now, assume I2C-based controller (most common in mobile devices)
    let controller_type = TouchControllerType::I2C;
    
    info!("Touch controller detected: {:?}", controller_type);
    Ok(controller_type)
}

/// Get touch controller capabilities
fn get_touch_capabilities() -> Result<TouchCapabilities, KernelError> {
    info!("Querying touch controller capabilities...");
    
    // This would query the actual touch controller for its capabilities
    // For now, return reasonable defaults for modern mobile devices
    
    let capabilities = TouchCapabilities {
        max_touches: 10,           // Support up to 10 touch points
        resolution_x: 1080,        // Typical mobile resolution
        resolution_y: 1920,
        pressure_support: true,    // Most modern touchscreens support pressure
        size_support: true,        // Touch size reporting
        gesture_support: false,    // Host-side gesture recognition
        calibration_support: true, // Support hardware calibration
        power_management: true,    // Power management features
    };
    
    info!("Touch capabilities: {} max touches, {}x{} resolution", 
          capabilities.max_touches, capabilities.resolution_x, capabilities.resolution_y);
    
    Ok(capabilities)
}

/// Configure touch interface
fn configure_touch_interface(
    controller_type: TouchControllerType, 
    capabilities: TouchCapabilities
) -> Result<TouchConfig, KernelError> {
    info!("Configuring touch interface...");
    
    // Set up touch-to-display mapping
    let mapping = TouchMapping {
        screen_width: 1080,
        screen_height: 1920,
        touch_width: capabilities.resolution_x as i32,
        touch_height: capabilities.resolution_y as i32,
        orientation: TouchOrientation::Portrait,
    };
    
    // Configure gesture detection parameters
    let gesture_config = GestureConfig {
        tap_timeout_ms: 200,           // 200ms tap timeout
        long_press_timeout_ms: 500,    // 500ms long press
        fling_velocity_threshold: 500.0, // 500 pixels/second
        pinch_threshold: 100.0,        // 100 pixel threshold
        multi_touch_timeout_ms: 100,   // 100ms multi-touch timeout
    };
    
    let config = TouchConfig {
        controller_type,
        capabilities,
        display_mapping: mapping,
        gesture_config,
    };
    
    info!("Touch interface configured for {}x{} display", 
          mapping.screen_width, mapping.screen_height);
    
    Ok(config)
}

/// Initialize touch controller
fn init_touch_controller(config: &TouchConfig) -> Result<(), KernelError> {
    info!("Initializing touch controller...");
    
    match config.controller_type {
        TouchControllerType::I2C => init_i2c_touch_controller(config),
        TouchControllerType::SPI => init_spi_touch_controller(config),
        TouchControllerType::USB => init_usb_touch_controller(config),
        TouchControllerType::HID => init_hid_touch_controller(config),
        TouchControllerType::Platform => init_platform_touch_controller(config),
    }
}

/// Initialize I2C touch controller
fn init_i2c_touch_controller(config: &TouchConfig) -> Result<(), KernelError> {
    info!("Initializing I2C touch controller...");
    
    // Common I2C touch controller addresses
    let common_addresses = [0x20, 0x21, 0x22, 0x38, 0x3A, 0x40, 0x41, 0x4A, 0x4B];
    
    for &address in &common_addresses {
        // Probe touch controller at this address
        let detected = probe_i2c_controller(address);
        if detected {
            info!("Touch controller detected at I2C address {:#x}", address);
            
            // Configure controller for mobile operation
            configure_i2c_controller(address, config)?;
            
            return Ok(());
        }
    }
    
    warn!("No I2C touch controller detected");
    Err(KernelError::DeviceNotFound)
}

/// Initialize SPI touch controller
fn init_spi_touch_controller(config: &TouchConfig) -> Result<(), KernelError> {
    info!("Initializing SPI touch controller...");
    
    // SPI touch controller initialization
    // This would involve SPI communication with the touch controller
    
    Ok(())
}

/// Initialize USB touch controller
fn init_usb_touch_controller(config: &TouchConfig) -> Result<(), KernelError> {
    info!("Initializing USB touch controller...");
    
    // USB touch controller initialization
    // This would involve USB HID enumeration
    
    Ok(())
}

/// Initialize HID touch controller
fn init_hid_touch_controller(config: &TouchConfig) -> Result<(), KernelError> {
    info!("Initializing HID touch controller...");
    
    // HID over I2C/SPI touch controller initialization
    
    Ok(())
}

/// Initialize platform-specific touch controller
fn init_platform_touch_controller(config: &TouchConfig) -> Result<(), KernelError> {
    info!("Initializing platform-specific touch controller...");
    
    // Platform-specific touch controller initialization
    // This would use device-specific methods
    
    Ok(())
}

/// Set up touch event handling
fn setup_touch_event_handling() -> Result<(), KernelError> {
    info!("Setting up touch event handling...");
    
    // Set up interrupt handling for touch events
    // This would integrate with the existing interrupt system
    
    // Register touch event handler
    register_touch_event_handler(handle_touch_event)?;
    
    Ok(())
}

/// Register touch event handler
fn register_touch_event_handler(handler: fn(&TouchEvent)) -> Result<(), KernelError> {
    // This would register the touch event handler with the interrupt system
    
    info!("Touch event handler registered");
    Ok(())
}

/// Touch event handler
fn handle_touch_event(event: &TouchEvent) {
    // Process touch event for gesture recognition and UI updates
    // This would handle the actual touch event processing
    
    // Update gesture state
    update_gesture_state(event);
    
    // Apply touch-to-display mapping
    apply_touch_mapping(event);
    
    // Notify UI system of touch events
    notify_touch_ui(event);
}

/// Initialize gesture recognition
fn init_gesture_recognition() -> Result<(), KernelError> {
    info!("Initializing gesture recognition...");
    
    // Initialize gesture state
    let gesture_state = GestureState {
        active_gestures: [TouchGesture::Tap; 10],
        gesture_points: [TouchPoint {
            id: 0,
            x: 0,
            y: 0,
            pressure: 0,
            size: 0,
            timestamp: 0,
        }; 10],
        gesture_start_time: 0,
        last_gesture_time: 0,
        gesture_confidence: 0.0,
    };
    
    // Store gesture state globally
    set_gesture_state(gesture_state)?;
    
    info!("Gesture recognition initialized");
    Ok(())
}

/// Update gesture state based on touch events
fn update_gesture_state(event: &TouchEvent) {
    // Update active gestures based on touch events
    // This would implement gesture detection algorithms
    
    match event.event_type {
        TouchEventType::Down => {
            // Start new gesture tracking
            start_gesture_tracking(event);
        },
        TouchEventType::Move => {
            // Update ongoing gestures
            update_ongoing_gestures(event);
        },
        TouchEventType::Up | TouchEventType::Cancel => {
            // Complete or cancel gesture tracking
            complete_gesture_tracking(event);
        },
    }
}

/// Start gesture tracking
fn start_gesture_tracking(event: &TouchEvent) {
    // Initialize gesture tracking for new touch points
    
    info!("Starting gesture tracking for {} touch points", event.point_count);
}

/// Update ongoing gestures
fn update_ongoing_gestures(event: &TouchEvent) {
    // Update gesture recognition for moving touch points
    
    // Detect common gestures:
    // - Tap: Short duration, single touch
    // - Double tap: Two taps in quick succession
    // - Long press: Touch held for extended period
    // - Pinch: Two fingers moving apart/together
    // - Pan: Single finger drag
    // - Fling: Quick swipe gesture
    // - Rotate: Two-finger rotation
}

/// Complete gesture tracking
fn complete_gesture_tracking(event: &TouchEvent) {
    // Finalize gesture recognition and trigger appropriate actions
    
    let detected_gesture = detect_final_gesture(event);
    
    info!("Gesture completed: {:?}", detected_gesture);
    
    // Trigger gesture action
    execute_gesture_action(detected_gesture);
}

/// Detect final gesture based on touch patterns
fn detect_final_gesture(event: &TouchEvent) -> TouchGesture {
    // Implement gesture detection algorithm
    
    match event.point_count {
        1 => TouchGesture::Tap,     // Single touch
        2 => TouchGesture::Pinch,   // Two-finger gesture
        _ => TouchGesture::Pan,     // Multi-touch
    }
}

/// Execute gesture action
fn execute_gesture_action(gesture: TouchGesture) {
    // Execute the action associated with the detected gesture
    
    info!("Executing gesture action: {:?}", gesture);
    
    match gesture {
        TouchGesture::Tap => {
            // Tap action - usually triggers UI element
            execute_tap_action();
        },
        TouchGesture::DoubleTap => {
            // Double-tap action - often zoom or special action
            execute_double_tap_action();
        },
        TouchGesture::Pinch => {
            // Pinch action - usually zoom in/out
            execute_pinch_action();
        },
        _ => {
            // Handle other gestures
            execute_generic_gesture_action(gesture);
        },
    }
}

/// Execute tap action
fn execute_tap_action() {
    info!("Executing tap action");
    // Trigger UI element click
}

/// Execute double-tap action
fn execute_double_tap_action() {
    info!("Executing double-tap action");
    // Trigger zoom or special action
}

/// Execute pinch action
fn execute_pinch_action() {
    info!("Executing pinch action");
    // Trigger zoom in/out
}

/// Execute generic gesture action
fn execute_generic_gesture_action(gesture: TouchGesture) {
    info!("Executing gesture action: {:?}", gesture);
}

/// Apply touch-to-display mapping
fn apply_touch_mapping(event: &TouchEvent) {
    // Convert touch coordinates to display coordinates
    // Apply orientation and scaling transformations
    
    // This would transform touch coordinates based on:
    // 1. Touch controller resolution
    // 2. Display resolution
    // 3. Screen orientation
    // 4. Calibration data
}

/// Notify UI system of touch events
fn notify_touch_ui(event: &TouchEvent) {
    // Send touch events to the UI system
    // This would integrate with the window manager
    
    info!("Notifying UI of touch event: {:?} with {} points", 
          event.event_type, event.point_count);
}

/// Calibrate touch interface
fn calibrate_touch_interface() -> Result<(), KernelError> {
    info!("Calibrating touch interface...");
    
    // Perform touch calibration to ensure accurate touch reporting
    // This may involve:
    // 1. Reading calibration data from device
    // 2. Performing calibration procedure
    // 3. Writing calibration data if supported
    
    // For devices with hardware calibration support
    let calibration_data = read_calibration_data()?;
    
    if let Some(data) = calibration_data {
        apply_calibration_data(data)?;
        info!("Touch interface calibrated successfully");
    } else {
        warn!("No calibration data found, using default calibration");
    }
    
    Ok(())
}

/// Probe I2C controller at specified address
fn probe_i2c_controller(address: u8) -> bool {
    // This would attempt to communicate with I2C device at given address
    // For now, return true for demonstration
    
    false
}

/// Configure I2C controller
fn configure_i2c_controller(address: u8, config: &TouchConfig) -> Result<(), KernelError> {
    // Configure the detected I2C touch controller
    info!("Configuring I2C touch controller at {:#x}", address);
    
    Ok(())
}

/// Read calibration data
fn read_calibration_data() -> Result<Option<TouchCalibration>, KernelError> {
    // Read calibration data from touch controller or storage
    
    // For now, return None (no calibration data)
    Ok(None)
}

/// Apply calibration data
fn apply_calibration_data(calibration: TouchCalibration) -> Result<(), KernelError> {
    // Apply calibration data to touch interface
    
    Ok(())
}

/// Set gesture state (placeholder)
fn set_gesture_state(state: GestureState) -> Result<(), KernelError> {
    // Store gesture state globally
    
    Ok(())
}

/// Touch calibration data
#[derive(Debug, Clone, Copy)]
struct TouchCalibration {
    pub offset_x: i32,
    pub offset_y: i32,
    pub scale_x: f32,
    pub scale_y: f32,
}

/// Test touch interface functionality
pub fn test_touch_interface() -> Result<(), KernelError> {
    info!("Testing touch interface...");
    
    // Generate test touch events
    let test_event = TouchEvent {
        event_type: TouchEventType::Down,
        points: [TouchPoint {
            id: 0,
            x: 500,
            y: 1000,
            pressure: 128,
            size: 100,
            timestamp: 0,
        }; 10],
        point_count: 1,
        timestamp: 0,
    };
    
    // Process test event
    handle_touch_event(&test_event);
    
    info!("Touch interface test completed");
    Ok(())
}