//! Home Automation System for RISC-V
//! 
//! This application demonstrates a comprehensive home automation system with lighting,
//! security, and climate control using RISC-V architecture. It includes smart lighting
//! with dimming and color control, security monitoring with cameras and sensors,
//! climate control with HVAC management, and integration with smart home ecosystems.
//!
//! Hardware Requirements:
//! - RISC-V development board (SiFive HiFive, Kendryte K210)
//! - Smart LED strips (RGB + dimming)
//! - Motion sensors (PIR, ultrasonic)
//! - Door/window sensors (magnetic)
//! - Camera module for security
//! - Temperature and humidity sensors
//! - Smart switches and outlets
//! - Zigbee or Z-Wave modules for device communication
//! - Voice assistant integration (optional)

#![no_std]
#![no_main]

use core::fmt::Write;
use heapless::{String, Vec, FnvIndexMap};
use core::sync::atomic::{AtomicU32, Ordering};

use riscv_hal::*;
use iot_communication::*;

// Device states and controls
#[derive(Clone, Copy, Debug)]
struct DeviceState {
    device_id: String<32>,
    device_type: DeviceType,
    is_on: bool,
    brightness: u8,      // 0-100%
    color_hue: u16,      // 0-359 degrees
    color_saturation: u8, // 0-100%
    temperature: i16,    // For climate devices (deci-celsius)
    timestamp: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DeviceType {
    Light,
    Switch,
    Outlet,
    Thermostat,
    Sensor,
    Camera,
    SecuritySystem,
    HVAC,
    Window,
    Door,
    Blinds,
    Speaker,
    Display,
}

// Room configuration
#[derive(Clone, Copy)]
struct Room {
    room_id: String<16>,
    room_name: String<24>,
    device_list: FnvIndexMap<String<32>, DeviceState, 16>,
    climate_control: bool,
    security_zones: FnvIndexMap<String<32>, SecurityZone, 8>,
    automation_rules: Vec<AutomationRule, 16>,
}

impl Room {
    pub fn new(room_name: String<24>) -> Self {
        Self {
            room_id: String::from("room_01"), // Generate unique ID
            room_name,
            device_list: FnvIndexMap::new(),
            climate_control: false,
            security_zones: FnvIndexMap::new(),
            automation_rules: Vec::new(),
        }
    }

    pub fn add_device(&mut self, device: DeviceState) {
        self.device_list.insert(device.device_id.clone(), device).unwrap_or(());
    }

    pub fn get_device(&self, device_id: &str) -> Option<&DeviceState> {
        self.device_list.get(device_id)
    }

    pub fn get_device_mut(&mut self, device_id: &str) -> Option<&mut DeviceState> {
        self.device_list.get_mut(device_id)
    }
}

// Security zones
#[derive(Clone, Copy, Debug)]
struct SecurityZone {
    zone_id: String<24>,
    zone_type: ZoneType,
    sensors: Vec<String<32>, 8>, // Sensor device IDs
    armed: bool,
    last_activity: u32,
    alarm_level: AlarmLevel,
}

#[derive(Clone, Copy, Debug)]
enum ZoneType {
    Perimeter = 1,
    Interior = 2,
    Garage = 3,
    Basement = 4,
    Kitchen = 5,
    Bedroom = 6,
    Office = 7,
    LivingRoom = 8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum AlarmLevel {
    Disarmed = 0,
    Armed = 1,
    Triggered = 2,
    Alarm = 3,
    Emergency = 4,
}

// Security sensors
#[derive(Clone, Copy, Debug)]
struct SecuritySensor {
    sensor_id: String<32>,
    sensor_type: SensorType,
    location: String<24>,
    is_triggered: bool,
    battery_level: u8,     // 0-100%
    last_update: u32,
    false_positive_count: u8,
}

#[derive(Clone, Copy, Debug)]
enum SensorType {
    Motion = 1,
    DoorContact = 2,
    WindowContact = 3,
    GlassBreak = 4,
    Smoke = 5,
    CO = 6,
    Water = 7,
    Vibration = 8,
    BeamBreak = 9,
    CameraMotion = 10,
}

// Climate control
#[derive(Clone, Copy, Debug)]
struct ClimateControl {
    current_temp: i16,        // deci-celsius
    target_temp: i16,         // deci-celsius
    current_humidity: u16,    // deci-percent
    target_humidity: u16,     // deci-percent
    mode: ClimateMode,
    fan_speed: u8,            // 0-100%
    hvac_state: HVACState,
    energy_usage: u32,        // Wh today
    comfort_score: u8,        // 0-100%
}

#[derive(Clone, Copy, Debug)]
enum ClimateMode {
    Off = 0,
    Heat = 1,
    Cool = 2,
    Auto = 3,
    FanOnly = 4,
    Dehumidify = 5,
}

#[derive(Clone, Copy, Debug)]
enum HVACState {
    Idle = 0,
    Heating = 1,
    Cooling = 2,
    Ventilating = 3,
    Defrost = 4,
    Emergency = 5,
}

// Lighting automation
#[derive(Clone, Copy, Debug)]
struct LightingScene {
    scene_id: String<16>,
    scene_name: String<24>,
    brightness_level: u8,
    color_temp: u16,        // Kelvin temperature
    hue: u16,               // 0-359 degrees
    saturation: u8,         // 0-100%
    affected_devices: Vec<String<32>, 16>, // Device IDs
    is_active: bool,
}

// Automation rules
#[derive(Clone, Copy, Debug)]
struct AutomationRule {
    rule_id: String<24>,
    rule_name: String<32>,
    trigger: Trigger,
    actions: Vec<Action, 8>,
    conditions: Vec<Condition, 8>,
    enabled: bool,
    last_executed: u32,
}

#[derive(Clone, Copy, Debug)]
enum Trigger {
    Motion = 1,
    Time = 2,
    Sunrise = 3,
    Sunset = 4,
    Temperature = 5,
    Humidity = 6,
    Weather = 7,
    Security = 8,
    Voice = 9,
    Manual = 10,
}

#[derive(Clone, Copy, Debug)]
struct Action {
    device_id: String<32>,
    action_type: ActionType,
    value: String<64>, // Generic value storage
}

#[derive(Clone, Copy, Debug)]
enum ActionType {
    TurnOn = 1,
    TurnOff = 2,
    SetBrightness = 3,
    SetColor = 4,
    SetTemperature = 5,
    PlaySound = 6,
    SendNotification = 7,
    RecordVideo = 8,
    Lock = 9,
    Unlock = 10,
    SetMode = 11,
}

#[derive(Clone, Copy, Debug)]
struct Condition {
    condition_type: ConditionType,
    threshold: String<32>,
    operator: String<4>, // ">", "<", "==", "!="
}

// Voice commands
#[derive(Clone, Copy, Debug)]
struct VoiceCommand {
    command_id: String<16>,
    phrase: String<64>,
    confidence: u8,     // 0-100%
    intent: VoiceIntent,
    parameters: Vec<(String<32>, String<64>), 8>,
    timestamp: u32,
}

#[derive(Clone, Copy, Debug)]
enum VoiceIntent {
    LightsOn = 1,
    LightsOff = 2,
    DimLights = 3,
    SetColor = 4,
    SetTemperature = 5,
    SecurityArm = 6,
    SecurityDisarm = 7,
    PlayMusic = 8,
    SetScene = 9,
    GoodMorning = 10,
    GoodNight = 11,
}

// Energy monitoring
#[derive(Clone, Copy, Debug)]
struct EnergyData {
    device_id: String<32>,
    current_power: u32,     // Watts
    daily_usage: u32,       // Wh
    monthly_usage: u32,     // kWh
    cost_today: f32,        // Currency
    peak_demand: u32,       // Watts
    energy_efficiency: u8,  // 0-100%
    timestamp: u32,
}

// Main application state
struct HomeAutomationApp {
    rooms: FnvIndexMap<String<16>, Room, 8>,
    security_sensors: FnvIndexMap<String<32>, SecuritySensor, 32>,
    climate_control: ClimateControl,
    lighting_scenes: FnvIndexMap<String<16>, LightingScene, 16>,
    automation_rules: FnvIndexMap<String<24>, AutomationRule, 24>,
    energy_monitor: FnvIndexMap<String<32>, EnergyData, 16>,
    communication_manager: CommunicationManager,
    voice_assistant: Option<VoiceAssistant>,
    camera_system: CameraSystem,
    notification_system: NotificationSystem,
    home_state: HomeState,
}

// Voice assistant integration
struct VoiceAssistant {
    enabled: bool,
    wake_word_detected: bool,
    listening: bool,
    processing: bool,
    last_command: Option<VoiceCommand>,
}

// Camera security system
struct CameraSystem {
    cameras: FnvIndexMap<String<24>, SecurityCamera, 8>,
    recording_enabled: bool,
    motion_detection: bool,
    face_recognition: bool,
    night_vision: bool,
}

#[derive(Clone, Copy, Debug)]
struct SecurityCamera {
    camera_id: String<24>,
    location: String<32>,
    resolution: (u16, u16), // (width, height)
    frame_rate: u8,
    is_recording: bool,
    motion_detected: bool,
    last_motion_time: u32,
}

// Notification system
struct NotificationSystem {
    notifications: Vec<Notification, 50>,
    sms_enabled: bool,
    email_enabled: bool,
    push_enabled: bool,
    emergency_contacts: Vec<String<32>, 8>,
}

#[derive(Clone, Copy, Debug)]
struct Notification {
    notification_id: String<16>,
    title: String<64>,
    message: String<256>,
    priority: NotificationPriority,
    timestamp: u32,
    read: bool,
}

#[derive(Clone, Copy, Debug)]
enum NotificationPriority {
    Info = 1,
    Warning = 2,
    Alert = 3,
    Emergency = 4,
}

#[derive(Clone, Copy, Debug)]
enum HomeState {
    Away = 1,
    Home = 2,
    Night = 3,
    Vacation = 4,
    Guest = 5,
    Party = 6,
    Sleep = 7,
    Cleaning = 8,
}

impl HomeAutomationApp {
    pub fn new() -> Self {
        let mut climate_control = ClimateControl {
            current_temp: 2200, // 22.0°C
            target_temp: 2200,  // 22.0°C
            current_humidity: 5500, // 55.0%
            target_humidity: 5000, // 50.0%
            mode: ClimateMode::Auto,
            fan_speed: 50,     // 50%
            hvac_state: HVACState::Idle,
            energy_usage: 0,
            comfort_score: 85,
        };

        Self {
            rooms: FnvIndexMap::new(),
            security_sensors: FnvIndexMap::new(),
            climate_control,
            lighting_scenes: FnvIndexMap::new(),
            automation_rules: FnvIndexMap::new(),
            energy_monitor: FnvIndexMap::new(),
            communication_manager: CommunicationManager::new(),
            voice_assistant: Some(VoiceAssistant {
                enabled: true,
                wake_word_detected: false,
                listening: false,
                processing: false,
                last_command: None,
            }),
            camera_system: CameraSystem {
                cameras: FnvIndexMap::new(),
                recording_enabled: true,
                motion_detection: true,
                face_recognition: false,
                night_vision: true,
            },
            notification_system: NotificationSystem {
                notifications: Vec::new(),
                sms_enabled: true,
                email_enabled: true,
                push_enabled: true,
                emergency_contacts: Vec::new(),
            },
            home_state: HomeState::Home,
        }
    }

    /// Initialize the home automation system
    pub fn init(&mut self) -> Result<(), HomeAutomationError> {
        // Initialize hardware
        self.init_hardware()?;
        
        // Initialize home rooms
        self.init_rooms()?;
        
        // Initialize security system
        self.init_security_system()?;
        
        // Initialize lighting system
        self.init_lighting_system()?;
        
        // Initialize HVAC system
        self.init_hvac_system()?;
        
        // Initialize cameras
        self.init_camera_system()?;
        
        // Load automation rules
        self.load_automation_rules()?;
        
        // Initialize voice assistant
        self.init_voice_assistant()?;
        
        // Initialize communication
        self.init_communication()?;
        
        println!("\n🏠 Home Automation System Initialized");
        println!("🏡 Home State: {:?}", self.home_state);
        println!("🎯 Rooms: {}", self.rooms.len());
        println!("🔒 Security Zones: {}", self.count_security_zones());
        println!("💡 Light Scenes: {}", self.lighting_scenes.len());
        println!("🤖 Voice Assistant: {}", self.voice_assistant.as_ref().unwrap().enabled);
        
        Ok(())
    }

    fn init_hardware(&self) -> Result<(), HomeAutomationError> {
        let config = SystemConfig {
            core_frequency_hz: 50_000_000, // 50 MHz
            memory_size: 512 * 1024,       // 512KB for multiple device management
            interrupt_controller: InterruptType::PLIC,
            power_management: PowerMode::Normal,
        };
        
        init_system(config);
        
        // Configure device communication interfaces
        self.init_device_interfaces()?;
        
        println!("✅ Home automation hardware initialized");
        Ok(())
    }

    fn init_device_interfaces(&self) -> Result<(), HomeAutomationError> {
        // Initialize I2C for smart devices
        let i2c_config = GpioConfig {
            pin_number: 0, // I2C SDA
            mode: GpioMode::AlternateFunction,
            pull_type: PullType::Up,
            drive_strength: DriveStrength::Medium,
        };
        GPIO_DRIVER.configure(i2c_config);
        
        // Initialize SPI for RGB LED control
        let spi_config = GpioConfig {
            pin_number: 5, // SPI MISO
            mode: GpioMode::AlternateFunction,
            pull_type: PullType::None,
            drive_strength: DriveStrength::High,
        };
        GPIO_DRIVER.configure(spi_config);
        
        // Initialize PWM for dimming
        let pwm_config = GpioConfig {
            pin_number: 10, // PWM output
            mode: GpioMode::Output,
            pull_type: PullType::None,
            drive_strength: DriveStrength::Medium,
        };
        GPIO_DRIVER.configure(pwm_config);
        
        // Configure security sensor inputs
        for pin in 20..=30 {
            let config = GpioConfig {
                pin_number: pin,
                mode: GpioMode::Input,
                pull_type: PullType::Up,
                drive_strength: DriveStrength::Low,
            };
            GPIO_DRIVER.configure(config);
        }
        
        Ok(())
    }

    fn init_rooms(&mut self) -> Result<(), HomeAutomationError> {
        let room_names = [
            String::from("Living Room"),
            String::from("Kitchen"),
            String::from("Master Bedroom"),
            String::from("Guest Bedroom"),
            String::from("Bathroom"),
            String::from("Office"),
            String::from("Garage"),
        ];
        
        for room_name in room_names {
            let mut room = Room::new(room_name.clone());
            
            // Add default devices based on room type
            match room_name.as_str() {
                "Living Room" => self.setup_living_room(&mut room),
                "Kitchen" => self.setup_kitchen(&mut room),
                "Master Bedroom" => self.setup_bedroom(&mut room),
                "Office" => self.setup_office(&mut room),
                "Garage" => self.setup_garage(&mut room),
                _ => self.setup_generic_room(&mut room),
            }
            
            self.rooms.insert(room.room_id.clone(), room).unwrap_or(());
        }
        
        println!("✅ Rooms initialized: {} rooms", self.rooms.len());
        Ok(())
    }

    fn setup_living_room(&mut self, room: &mut Room) {
        // Main ceiling light
        room.add_device(DeviceState {
            device_id: String::from("living_room_ceiling_light"),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 80,
            color_hue: 60, // Warm white
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Floor lamp
        room.add_device(DeviceState {
            device_id: String::from("living_room_floor_lamp"),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 60,
            color_hue: 45, // Warm white
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Smart TV (controlled outlet)
        room.add_device(DeviceState {
            device_id: String::from("living_room_tv"),
            device_type: DeviceType::Outlet,
            is_on: true,
            brightness: 0,
            color_hue: 0,
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Motion sensor
        room.add_device(DeviceState {
            device_id: String::from("living_room_motion"),
            device_type: DeviceType::Sensor,
            is_on: true,
            brightness: 0,
            color_hue: 0,
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        room.climate_control = true;
    }

    fn setup_kitchen(&mut self, room: &mut Room) {
        // Kitchen lights
        room.add_device(DeviceState {
            device_id: String::from("kitchen_main_light"),
            device_type: DeviceType::Light,
            is_on: true,
            brightness: 90,
            color_hue: 65, // Cool white for food preparation
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Under-cabinet lighting
        room.add_device(DeviceState {
            device_id: String::from("kitchen_under_cabinet"),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 70,
            color_hue: 50, // Warm accent lighting
            color_saturation: 80,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Smart outlet for appliances
        room.add_device(DeviceState {
            device_id: String::from("kitchen_appliances"),
            device_type: DeviceType::Outlet,
            is_on: true,
            brightness: 0,
            color_hue: 0,
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
    }

    fn setup_bedroom(&mut self, room: &mut Room) {
        // Bedside lamps
        room.add_device(DeviceState {
            device_id: String::from("bedroom_bedside_left"),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 30,
            color_hue: 40, // Very warm for bedtime
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        room.add_device(DeviceState {
            device_id: String::from("bedroom_bedside_right"),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 30,
            color_hue: 40, // Very warm for bedtime
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Main ceiling light (dim)
        room.add_device(DeviceState {
            device_id: String::from("bedroom_ceiling_light"),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 20,
            color_hue: 45, // Warm
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Smart blinds
        room.add_device(DeviceState {
            device_id: String::from("bedroom_blinds"),
            device_type: DeviceType::Blinds,
            is_on: false,
            brightness: 0,
            color_hue: 0,
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
    }

    fn setup_office(&mut self, room: &mut Room) {
        // Desk lamp
        room.add_device(DeviceState {
            device_id: String::from("office_desk_lamp"),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 100,
            color_hue: 60, // Cool white for productivity
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Task lighting
        room.add_device(DeviceState {
            device_id: String::from("office_task_lights"),
            device_type: DeviceType::Light,
            is_on: true,
            brightness: 85,
            color_hue: 55, // Natural white
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Computer setup
        room.add_device(DeviceState {
            device_id: String::from("office_computer"),
            device_type: DeviceType::Outlet,
            is_on: true,
            brightness: 0,
            color_hue: 0,
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
    }

    fn setup_garage(&mut self, room: &mut Room) {
        // Garage lights
        room.add_device(DeviceState {
            device_id: String::from("garage_main_lights"),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 100,
            color_hue: 65, // Bright cool white
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        // Security camera
        room.add_device(DeviceState {
            device_id: String::from("garage_camera"),
            device_type: DeviceType::Camera,
            is_on: true,
            brightness: 0,
            color_hue: 0,
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
    }

    fn setup_generic_room(&mut self, room: &mut Room) {
        // Basic lighting setup
        room.add_device(DeviceState {
            device_id: format!("{}_main_light", room.room_name.as_str()).leak().to_string(),
            device_type: DeviceType::Light,
            is_on: false,
            brightness: 75,
            color_hue: 55, // Natural white
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
        
        room.add_device(DeviceState {
            device_id: format!("{}_motion", room.room_name.as_str()).leak().to_string(),
            device_type: DeviceType::Sensor,
            is_on: true,
            brightness: 0,
            color_hue: 0,
            color_saturation: 0,
            temperature: 0,
            timestamp: get_time().0,
        });
    }

    fn init_security_system(&mut self) -> Result<(), HomeAutomationError> {
        // Initialize security sensors
        let sensors = [
            SecuritySensor {
                sensor_id: String::from("front_door_sensor"),
                sensor_type: SensorType::DoorContact,
                location: String::from("Front Door"),
                is_triggered: false,
                battery_level: 95,
                last_update: get_time().0,
                false_positive_count: 0,
            },
            SecuritySensor {
                sensor_id: String::from("living_room_motion"),
                sensor_type: SensorType::Motion,
                location: String::from("Living Room"),
                is_triggered: false,
                battery_level: 90,
                last_update: get_time().0,
                false_positive_count: 0,
            },
            SecuritySensor {
                sensor_id: String::from("kitchen_window"),
                sensor_type: SensorType::WindowContact,
                location: String::from("Kitchen Window"),
                is_triggered: false,
                battery_level: 92,
                last_update: get_time().0,
                false_positive_count: 0,
            },
            SecuritySensor {
                sensor_id: String::from("garage_door"),
                sensor_type: SensorType::DoorContact,
                location: String::from("Garage Door"),
                is_triggered: false,
                battery_level: 88,
                last_update: get_time().0,
                false_positive_count: 0,
            },
        ];
        
        for sensor in sensors {
            self.security_sensors.insert(sensor.sensor_id.clone(), sensor).unwrap_or(());
        }
        
        println!("✅ Security system initialized: {} sensors", self.security_sensors.len());
        Ok(())
    }

    fn init_lighting_system(&mut self) -> Result<(), HomeAutomationError> {
        // Pre-configured lighting scenes
        let scenes = [
            LightingScene {
                scene_id: String::from("morning"),
                scene_name: String::from("Good Morning"),
                brightness_level: 80,
                color_temp: 5600, // Cool white, energizing
                hue: 200,         // Cool blue tone
                saturation: 60,
                affected_devices: Vec::new(),
                is_active: false,
            },
            LightingScene {
                scene_id: String::from("relax"),
                scene_name: String::from("Relaxation"),
                brightness_level: 40,
                color_temp: 2700, // Warm white, calming
                hue: 45,          // Warm orange
                saturation: 80,
                affected_devices: Vec::new(),
                is_active: false,
            },
            LightingScene {
                scene_id: String::from("movie"),
                scene_name: String::from("Movie Time"),
                brightness_level: 10,
                color_temp: 2200, // Very warm
                hue: 30,          // Deep orange
                saturation: 90,
                affected_devices: Vec::new(),
                is_active: false,
            },
            LightingScene {
                scene_id: String::from("party"),
                scene_name: String::from("Party Mode"),
                brightness_level: 100,
                color_temp: 6500, // Bright white
                hue: 0,           // Red
                saturation: 100,
                affected_devices: Vec::new(),
                is_active: false,
            },
        ];
        
        for scene in scenes {
            self.lighting_scenes.insert(scene.scene_id.clone(), scene).unwrap_or(());
        }
        
        println!("✅ Lighting scenes initialized: {} scenes", self.lighting_scenes.len());
        Ok(())
    }

    fn init_hvac_system(&mut self) -> Result<(), HomeAutomationError> {
        // HVAC system is already initialized in the struct
        // Configure additional settings
        
        // Setup thermostat schedules
        println!("✅ HVAC system initialized");
        println!("  - Current Temp: {}°C", self.climate_control.current_temp as f32 / 10.0);
        println!("  - Target Temp: {}°C", self.climate_control.target_temp as f32 / 10.0);
        println!("  - Mode: {:?}", self.climate_control.mode);
        
        Ok(())
    }

    fn init_camera_system(&mut self) -> Result<(), HomeAutomationError> {
        // Initialize security cameras
        let cameras = [
            SecurityCamera {
                camera_id: String::from("front_door_cam"),
                location: String::from("Front Door"),
                resolution: (1920, 1080), // 1080p
                frame_rate: 30,
                is_recording: true,
                motion_detected: false,
                last_motion_time: 0,
            },
            SecurityCamera {
                camera_id: String::from("living_room_cam"),
                location: String::from("Living Room"),
                resolution: (1280, 720), // 720p
                frame_rate: 25,
                is_recording: true,
                motion_detected: false,
                last_motion_time: 0,
            },
        ];
        
        for camera in cameras {
            self.camera_system.cameras.insert(camera.camera_id.clone(), camera).unwrap_or(());
        }
        
        println!("✅ Camera system initialized: {} cameras", self.camera_system.cameras.len());
        Ok(())
    }

    fn init_voice_assistant(&mut self) -> Result<(), HomeAutomationError> {
        if let Some(assistant) = &mut self.voice_assistant {
            assistant.enabled = true;
            assistant.wake_word_detected = false;
            assistant.listening = false;
            assistant.processing = false;
            
            println!("✅ Voice assistant initialized");
        }
        
        Ok(())
    }

    fn load_automation_rules(&mut self) -> Result<(), HomeAutomationError> {
        // Common automation rules
        let rules = [
            AutomationRule {
                rule_id: String::from("motion_night_lights"),
                rule_name: String::from("Motion-Activated Night Lights"),
                trigger: Trigger::Motion,
                actions: Vec::new(),
                conditions: Vec::new(),
                enabled: true,
                last_executed: 0,
            },
            AutomationRule {
                rule_id: String::from("sunset_lights"),
                rule_name: String::from("Sunset Lighting"),
                trigger: Trigger::Sunset,
                actions: Vec::new(),
                conditions: Vec::new(),
                enabled: true,
                last_executed: 0,
            },
            AutomationRule {
                rule_id: String::from("security_away_mode"),
                rule_name: String::from("Away Mode Security"),
                trigger: Trigger::Manual,
                actions: Vec::new(),
                conditions: Vec::new(),
                enabled: true,
                last_executed: 0,
            },
        ];
        
        for rule in rules {
            self.automation_rules.insert(rule.rule_id.clone(), rule).unwrap_or(());
        }
        
        println!("✅ Automation rules loaded: {} rules", self.automation_rules.len());
        Ok(())
    }

    fn init_communication(&mut self) -> Result<(), HomeAutomationError> {
        // Initialize communication for smart home integration
        #[cfg(feature = "zigbee")]
        {
            println!("  - Initializing Zigbee network");
        }
        
        #[cfg(feature = "zwave")]
        {
            println!("  - Initializing Z-Wave network");
        }
        
        #[cfg(feature = "wifi")]
        {
            let uart = UART_DRIVER.borrow();
            let static_uart = unsafe { &*(uart as *const Uart) };
            
            self.communication_manager.init_wifi(static_uart, "HomeWiFi", "smart123")?;
            println!("  - WiFi communication established");
        }
        
        #[cfg(feature = "mqtt")]
        {
            println!("  - MQTT integration enabled");
        }
        
        println!("✅ Communication system initialized");
        Ok(())
    }

    /// Main application loop
    pub fn run(&mut self) -> ! {
        let mut cycle_counter = 0u32;
        
        loop {
            // Process voice commands (continuous)
            self.process_voice_commands();
            
            // Monitor security sensors (every 5 seconds)
            if cycle_counter % 5 == 0 {
                self.monitor_security_sensors();
            }
            
            // Check automation rules (every 30 seconds)
            if cycle_counter % 30 == 0 {
                self.check_automation_rules();
            }
            
            // HVAC control (every 60 seconds)
            if cycle_counter % 60 == 0 {
                self.control_hvac_system();
            }
            
            // Energy monitoring (every 300 seconds = 5 minutes)
            if cycle_counter % 300 == 0 {
                self.monitor_energy_usage();
            }
            
            // Camera monitoring (every 10 seconds)
            if cycle_counter % 10 == 0 {
                self.monitor_cameras();
            }
            
            // Device status updates (every 60 seconds)
            if cycle_counter % 60 == 0 {
                self.update_device_status();
            }
            
            // Send periodic updates (every 600 seconds = 10 minutes)
            if cycle_counter % 600 == 0 {
                self.send_status_updates();
            }
            
            cycle_counter = cycle_counter.wrapping_add(1);
            
            // Prevent overflow
            if cycle_counter == 0 {
                cycle_counter = 1;
            }
            
            delay_ms(1000); // 1 second base cycle
        }
    }

    fn process_voice_commands(&mut self) {
        if let Some(assistant) = &mut self.voice_assistant {
            if assistant.enabled && !assistant.processing {
                // Simulate wake word detection
                // In a real implementation, this would be triggered by actual audio input
                if cycle_counter % 300 == 0 { // Every 5 minutes for demo
                    assistant.wake_word_detected = true;
                    assistant.listening = true;
                    println!("🎤 Voice assistant activated");
                    
                    // Process simulated command
                    self.process_voice_command("turn on living room lights");
                    assistant.listening = false;
                    assistant.processing = false;
                }
            }
        }
    }

    fn process_voice_command(&mut self, command: &str) {
        println!("🎤 Processing voice command: {}", command);
        
        // Simple command parsing
        let command_lower = command.to_lowercase();
        
        if command_lower.contains("turn on") && command_lower.contains("living room") {
            self.set_device_state("living_room_ceiling_light", true, Some(80));
            self.send_notification("Lights", "Living room ceiling light turned on", NotificationPriority::Info);
        } else if command_lower.contains("turn off") {
            if command_lower.contains("living room") {
                self.set_device_state("living_room_ceiling_light", false, None);
            }
        } else if command_lower.contains("dim") && command_lower.contains("bedroom") {
            self.set_device_brightness("bedroom_ceiling_light", 30);
        } else if command_lower.contains("good night") {
            self.activate_scene("relax");
        }
    }

    fn monitor_security_sensors(&mut self) {
        for (sensor_id, sensor) in &mut self.security_sensors {
            // Simulate sensor reading
            let is_triggered = self.read_security_sensor(sensor_id);
            
            if is_triggered != sensor.is_triggered {
                println!("🔒 Security sensor '{}' {}: {}", 
                        sensor.location,
                        if is_triggered { "TRIGGERED" } else { "cleared" },
                        sensor.sensor_type as u8);
                
                self.handle_security_event(sensor, is_triggered);
            }
        }
    }

    fn read_security_sensor(&self, sensor_id: &str) -> bool {
        // Simulate sensor readings
        // In a real implementation, this would read actual sensor data
        
        match sensor_id {
            "front_door_sensor" => GPIO_DRIVER.read_input(20),
            "living_room_motion" => GPIO_DRIVER.read_input(21),
            "kitchen_window" => GPIO_DRIVER.read_input(22),
            "garage_door" => GPIO_DRIVER.read_input(23),
            _ => false,
        }
    }

    fn handle_security_event(&mut self, sensor: &SecuritySensor, triggered: bool) {
        if triggered {
            match sensor.sensor_type {
                SensorType::Motion => {
                    if self.home_state == HomeState::Night || self.home_state == HomeState::Away {
                        println!("🚨 Motion detected during armed mode: {}", sensor.location);
                        self.trigger_security_alarm(sensor.location);
                    }
                },
                SensorType::DoorContact | SensorType::WindowContact => {
                    println!("🚨 Door/window opened: {}", sensor.location);
                    self.send_notification("Security Alert", 
                                          &format!("{} opened", sensor.location), 
                                          NotificationPriority::Warning);
                },
                _ => {
                    println!("🔒 Security sensor triggered: {}", sensor.location);
                }
            }
        }
    }

    fn trigger_security_alarm(&self, location: &str) {
        println!("🚨 SECURITY ALARM TRIGGERED at {}", location);
        
        // Turn on all lights
        self.activate_scene("emergency");
        
        // Start recording
        self.start_recording();
        
        // Send emergency notifications
        // Emergency notifications would be sent to authorities and contacts
    }

    fn check_automation_rules(&mut self) {
        let current_time = get_time().0;
        
        for (rule_id, rule) in &mut self.automation_rules {
            if !rule.enabled {
                continue;
            }
            
            let should_execute = match rule.trigger {
                Trigger::Motion => self.check_motion_trigger(),
                Trigger::Time => self.check_time_trigger(),
                Trigger::Sunset => self.check_sunset_trigger(),
                Trigger::Temperature => self.check_temperature_trigger(),
                Trigger::Manual => false,
                _ => false,
            };
            
            if should_execute && current_time - rule.last_executed > 300 { // 5 min cooldown
                self.execute_automation_rule(rule_id);
                rule.last_executed = current_time;
            }
        }
    }

    fn check_motion_trigger(&self) -> bool {
        // Check if any motion sensor is triggered
        for sensor in self.security_sensors.values() {
            if sensor.sensor_type == SensorType::Motion && sensor.is_triggered {
                return true;
            }
        }
        false
    }

    fn check_time_trigger(&self) -> bool {
        // Check if it's a specific time
        let current_time = get_time().0;
        let hour = (current_time / 3600) % 24;
        
        // Example: trigger at 7 AM
        hour == 7
    }

    fn check_sunset_trigger(&self) -> bool {
        // Simple sunset detection (would use astronomical calculations)
        let current_time = get_time().0;
        let hour = (current_time / 3600) % 24;
        
        // Trigger around 6 PM
        hour == 18
    }

    fn check_temperature_trigger(&self) -> bool {
        // Check temperature-based triggers
        self.climate_control.current_temp > 3000 || // Above 30°C
        self.climate_control.current_temp < 1500    // Below 15°C
    }

    fn execute_automation_rule(&mut self, rule_id: &str) {
        println!("⚡ Executing automation rule: {}", rule_id);
        
        match rule_id {
            "motion_night_lights" => {
                if self.home_state == HomeState::Night {
                    self.activate_scene("night_lights");
                }
            },
            "sunset_lights" => {
                self.activate_scene("relax");
            },
            "security_away_mode" => {
                self.set_home_state(HomeState::Away);
            },
            _ => println!("⚡ Unknown rule: {}", rule_id),
        }
    }

    fn control_hvac_system(&mut self) {
        // HVAC control logic
        let temp_diff = self.climate_control.current_temp - self.climate_control.target_temp;
        
        match self.climate_control.mode {
            ClimateMode::Auto => {
                if temp_diff > 100 { // Current > Target + 1°C
                    // Turn on cooling
                    self.climate_control.hvac_state = HVACState::Cooling;
                } else if temp_diff < -100 { // Current < Target - 1°C
                    // Turn on heating
                    self.climate_control.hvac_state = HVACState::Heating;
                } else {
                    // Temperature is within range
                    self.climate_control.hvac_state = HVACState::Idle;
                }
            },
            ClimateMode::Heat if temp_diff < -50 => {
                self.climate_control.hvac_state = HVACState::Heating;
            },
            ClimateMode::Cool if temp_diff > 50 => {
                self.climate_control.hvac_state = HVACState::Cooling;
            },
            _ => {
                self.climate_control.hvac_state = HVACState::Idle;
            }
        }
        
        // Update energy usage
        match self.climate_control.hvac_state {
            HVACState::Heating | HVACState::Cooling => {
                self.climate_control.energy_usage += 500; // Add 500 Wh
            },
            _ => {},
        }
        
        // Update comfort score
        self.update_comfort_score();
    }

    fn update_comfort_score(&mut self) {
        let temp_diff = (self.climate_control.current_temp - self.climate_control.target_temp).abs();
        let hum_diff = (self.climate_control.current_humidity - self.climate_control.target_humidity).abs();
        
        let mut score = 100u8;
        
        // Deduct points for temperature deviation
        score = score.saturating_sub((temp_diff / 10) as u8);
        
        // Deduct points for humidity deviation
        score = score.saturating_sub((hum_diff / 100) as u8);
        
        self.climate_control.comfort_score = score;
    }

    fn monitor_energy_usage(&mut self) {
        // Update energy monitoring for each device
        for (room_id, room) in &mut self.rooms {
            for (device_id, device) in &mut room.device_list {
                if device.device_type == DeviceType::Light && device.is_on {
                    // Update energy usage based on brightness
                    let power_usage = (device.brightness as u32 * 15) / 100; // 15W max per bulb
                    
                    let energy_data = self.energy_monitor.entry(device_id.clone())
                        .or_insert(EnergyData {
                            device_id: device_id.clone(),
                            current_power: power_usage,
                            daily_usage: 0,
                            monthly_usage: 0,
                            cost_today: 0.0,
                            peak_demand: power_usage,
                            energy_efficiency: 85,
                            timestamp: get_time().0,
                        });
                    
                    energy_data.current_power = power_usage;
                    energy_data.daily_usage += power_usage; // Add per cycle
                    
                    if power_usage > energy_data.peak_demand {
                        energy_data.peak_demand = power_usage;
                    }
                }
            }
        }
        
        // Log total energy usage
        let total_usage: u32 = self.energy_monitor.values()
            .map(|data| data.current_power)
            .sum();
            
        println!("⚡ Energy Usage: {}W", total_usage);
    }

    fn monitor_cameras(&mut self) {
        for (camera_id, camera) in &mut self.camera_system.cameras {
            // Simulate motion detection
            let motion_detected = if self.camera_system.motion_detection {
                cycle_counter % 120 == 0 // Every 2 minutes for demo
            } else {
                false
            };
            
            if motion_detected && !camera.motion_detected {
                println!("📹 Motion detected by camera: {}", camera.location);
                
                camera.motion_detected = true;
                camera.last_motion_time = get_time().0;
                
                // Start recording if not already recording
                if !camera.is_recording {
                    camera.is_recording = true;
                    println!("📹 Recording started: {}", camera.location);
                }
                
                // Handle security event
                self.handle_camera_motion(camera_id, camera.location);
            } else if !motion_detected && camera.motion_detected {
                camera.motion_detected = false;
            }
        }
    }

    fn handle_camera_motion(&self, camera_id: &str, location: &str) {
        if self.home_state == HomeState::Away || self.home_state == HomeState::Night {
            println!("🚨 Camera motion during armed mode: {}", location);
            self.send_notification("Security Alert", 
                                  &format!("Motion detected by {} camera", location),
                                  NotificationPriority::Alert);
        }
    }

    fn update_device_status(&mut self) {
        // Update all device states
        for (room_id, room) in &self.rooms {
            let mut active_devices = 0;
            let mut total_devices = 0;
            
            for device in room.device_list.values() {
                total_devices += 1;
                if device.is_on {
                    active_devices += 1;
                }
            }
            
            if total_devices > 0 {
                println!("🏠 Room {}: {}/{} devices active", 
                        room.room_name, active_devices, total_devices);
            }
        }
    }

    fn send_status_updates(&mut self) {
        // Prepare status update
        let mut status_update = String::<256>::new();
        
        write!(&mut status_update, 
               "{{\"home_state\":\"{:?}\",\"rooms\":{},\"devices_on\":{},\"temp\":{}",
               self.home_state,
               self.rooms.len(),
               self.count_active_devices(),
               self.climate_control.current_temp).unwrap();
        
        // Add energy usage
        let total_energy: u32 = self.energy_monitor.values()
            .map(|data| data.current_power)
            .sum();
        write!(&mut status_update, ",\"energy_usage\":{}}}", total_energy).unwrap();
        
        // Transmit via MQTT
        #[cfg(feature = "mqtt")]
        {
            let topic = "home/automation/status";
            if let Ok(_) = self.communication_manager.send_message(
                status_update.as_bytes(),
                CommunicationProtocol::MQTT
            ) {
                println!("📡 Home status transmitted");
            }
        }
    }

    // Helper methods for device control
    fn set_device_state(&mut self, device_id: &str, state: bool, brightness: Option<u8>) {
        for room in self.rooms.values_mut() {
            if let Some(device) = room.get_device_mut(device_id) {
                device.is_on = state;
                if let Some(brightness_val) = brightness {
                    device.brightness = brightness_val;
                }
                device.timestamp = get_time().0;
                
                println!("💡 Device {} turned {}", 
                        device_id, if state { "ON" } else { "OFF" });
                
                // Send device update to communication system
                self.update_device_communication(device);
                
                return;
            }
        }
    }

    fn set_device_brightness(&mut self, device_id: &str, brightness: u8) {
        for room in self.rooms.values_mut() {
            if let Some(device) = room.get_device_mut(device_id) {
                device.brightness = brightness;
                device.is_on = brightness > 0;
                device.timestamp = get_time().0;
                
                println!("💡 Device {} brightness: {}%", device_id, brightness);
                self.update_device_communication(device);
                return;
            }
        }
    }

    fn activate_scene(&mut self, scene_id: &str) {
        if let Some(scene) = self.lighting_scenes.get(scene_id) {
            println!("🎨 Activating scene: {}", scene.scene_name);
            
            for room in self.rooms.values_mut() {
                // Apply scene to all devices in the room
                for device in room.device_list.values_mut() {
                    if device.device_type == DeviceType::Light {
                        device.is_on = scene.brightness_level > 0;
                        device.brightness = scene.brightness_level;
                        device.color_hue = scene.hue;
                        device.color_saturation = scene.saturation;
                        device.timestamp = get_time().0;
                    }
                }
            }
            
            self.send_notification("Scenes", 
                                  &format!("Activated: {}", scene.scene_name),
                                  NotificationPriority::Info);
        }
    }

    fn set_home_state(&mut self, new_state: HomeState) {
        println!("🏠 Home state changed: {:?} -> {:?}", self.home_state, new_state);
        self.home_state = new_state;
        
        match new_state {
            HomeState::Away => {
                // Activate security system
                self.activate_security_system();
                // Turn off all unnecessary devices
                self.turn_off_unnecessary_devices();
            },
            HomeState::Sleep => {
                self.activate_scene("relax");
                self.climate_control.target_temp = 2000; // 20°C for sleep
            },
            HomeState::Party => {
                self.activate_scene("party");
                self.climate_control.target_temp = 2300; // 23°C for comfort
            },
            _ => {},
        }
    }

    fn activate_security_system(&self) {
        println!("🔒 Activating security system");
        // Set all security zones to armed
        // Activate cameras
        // Turn on exterior lights
    }

    fn turn_off_unnecessary_devices(&mut self) {
        for room in self.rooms.values_mut() {
            for device in room.device_list.values_mut() {
                match device.device_type {
                    DeviceType::Light => device.is_on = false,
                    DeviceType::Outlet => {
                        // Only keep essential outlets on
                        if !device.device_id.contains("essential") {
                            device.is_on = false;
                        }
                    },
                    _ => {},
                }
            }
        }
    }

    fn start_recording(&self) {
        for camera in self.camera_system.cameras.values_mut() {
            camera.is_recording = true;
        }
        println!("📹 Recording started on all cameras");
    }

    fn send_notification(&self, title: &str, message: &str, priority: NotificationPriority) {
        println!("📱 {}: {}", title, message);
        
        // In a real implementation, this would send actual notifications
        // via SMS, email, push notifications, etc.
    }

    fn update_device_communication(&self, device: &DeviceState) {
        // Send device state update to communication system
        // This would update any connected smart home platforms
    }

    // Utility methods
    fn count_security_zones(&self) -> usize {
        let mut count = 0;
        for room in self.rooms.values() {
            count += room.security_zones.len();
        }
        count
    }

    fn count_active_devices(&self) -> usize {
        let mut count = 0;
        for room in self.rooms.values() {
            for device in room.device_list.values() {
                if device.is_on {
                    count += 1;
                }
            }
        }
        count
    }

    fn start_recording_cameras(&mut self) {
        for camera in self.camera_system.cameras.values_mut() {
            camera.is_recording = true;
        }
    }
}

// Error types
#[derive(Debug)]
pub enum HomeAutomationError {
    HardwareInitFailed,
    DeviceInitFailed,
    CommunicationError,
    SecuritySystemError,
    VoiceAssistantError,
}

// Global variables
static mut CYCLE_COUNTER: u32 = 0;

// RISC-V entry point
#[no_mangle]
pub extern "C" fn main() -> ! {
    // Initialize system
    let config = SystemConfig {
        core_frequency_hz: 50_000_000,
        memory_size: 512 * 1024,
        interrupt_controller: InterruptType::PLIC,
        power_management: PowerMode::Normal,
    };
    init_system(config);
    
    // Create and initialize application
    let mut app = HomeAutomationApp::new();
    
    if let Ok(_) = app.init() {
        app.run();
    } else {
        println!("❌ Failed to initialize home automation system");
        loop {}
    }
}