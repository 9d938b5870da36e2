//! Platform Abstraction Layer
//! 
//! This module provides high-level abstractions for platform-specific features
//! that applications can use without worrying about underlying architecture.

use crate::{ArchitectureType, CompatibilityError, log};
use spin::Mutex;
use bitflags::bitflags;

/// Platform identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    Desktop,
    Mobile,
    Embedded,
    Server,
    IoT,
}

/// Hardware capabilities
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HardwareCapabilities: u32 {
        const GPU = 0x001;
        const NETWORK = 0x002;
        const AUDIO = 0x004;
        const BLUETOOTH = 0x008;
        const WIFI = 0x010;
        const USB = 0x020;
        const SERIAL = 0x040;
        const TOUCHSCREEN = 0x080;
        const KEYBOARD = 0x100;
        const MOUSE = 0x200;
        const CAMERA = 0x400;
        const ACCELEROMETER = 0x800;
        const GPS = 0x1000;
        const FINGERPRINT = 0x2000;
    }
}

/// System information
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub platform_type: PlatformType,
    pub architecture: ArchitectureType,
    pub cpu_count: u32,
    pub total_memory: u64,
    pub available_memory: u64,
    pub hardware_capabilities: HardwareCapabilities,
    pub version: &'static str,
    pub build_number: u32,
}

/// Display configuration
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub resolution: (u32, u32),
    pub refresh_rate: u32,
    pub color_depth: u8,
    pub orientation: DisplayOrientation,
    pub brightness: u8,
    pub contrast: u8,
}

/// Display orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayOrientation {
    Portrait,
    Landscape,
    PortraitInverted,
    LandscapeInverted,
}

/// Audio configuration
#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u8,
    pub bit_depth: u8,
    pub buffer_size: u32,
    pub device_count: u8,
    pub master_volume: u8,
}

/// Network configuration
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub has_ethernet: bool,
    pub has_wifi: bool,
    pub has_bluetooth: bool,
    pub ip_address: [u8; 4],
    pub subnet_mask: [u8; 4],
    pub gateway: [u8; 4],
    pub dns_servers: [[u8; 4]; 3],
}

/// Power management configuration
#[derive(Debug, Clone)]
pub struct PowerConfig {
    pub battery_present: bool,
    pub ac_connected: bool,
    pub battery_level: u8,
    pub battery_health: u8,
    pub power_source: PowerSource,
    pub sleep_timeout: u32,
    pub hibernate_timeout: u32,
}

/// Power sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerSource {
    AC,
    Battery,
    USB,
    Wireless,
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub total_space: u64,
    pub free_space: u64,
    pub block_size: u32,
    pub is_removable: bool,
    pub filesystem_type: &'static str,
}

/// Security configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub secure_boot_enabled: bool,
    pub trusted_platform_module: bool,
    pub encryption_supported: bool,
    pub biometric_supported: bool,
    pub security_level: SecurityLevel,
}

/// Security levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SecurityLevel {
    None = 0,
    Basic = 1,
    Standard = 2,
    High = 3,
    Maximum = 4,
}

/// Base platform trait
pub trait Platform {
    /// Get system information
    fn get_system_info(&self) -> SystemInfo;
    
    /// Get display configuration
    fn get_display_config(&self) -> Result<DisplayConfig, CompatibilityError>;
    
    /// Set display configuration
    fn set_display_config(&self, config: &DisplayConfig) -> Result<(), CompatibilityError>;
    
    /// Get audio configuration
    fn get_audio_config(&self) -> Result<AudioConfig, CompatibilityError>;
    
    /// Set audio configuration
    fn set_audio_config(&self, config: &AudioConfig) -> Result<(), CompatibilityError>;
    
    /// Get network configuration
    fn get_network_config(&self) -> Result<NetworkConfig, CompatibilityError>;
    
    /// Set network configuration
    fn set_network_config(&self, config: &NetworkConfig) -> Result<(), CompatibilityError>;
    
    /// Get power configuration
    fn get_power_config(&self) -> Result<PowerConfig, CompatibilityError>;
    
    /// Set power configuration
    fn set_power_config(&self, config: &PowerConfig) -> Result<(), CompatibilityError>;
    
    /// Get storage configuration
    fn get_storage_config(&self) -> Result<StorageConfig, CompatibilityError>;
    
    /// Set storage configuration
    fn set_storage_config(&self, config: &StorageConfig) -> Result<(), CompatibilityError>;
    
    /// Get security configuration
    fn get_security_config(&self) -> Result<SecurityConfig, CompatibilityError>;
    
    /// Set security configuration
    fn set_security_config(&self, config: &SecurityConfig) -> Result<(), CompatibilityError>;
    
    /// Restart system
    fn restart(&self) -> Result<(), CompatibilityError>;
    
    /// Shutdown system
    fn shutdown(&self) -> Result<(), CompatibilityError>;
    
    /// Suspend system
    fn suspend(&self) -> Result<(), CompatibilityError>;
    
    /// Hibernate system
    fn hibernate(&self) -> Result<(), CompatibilityError>;
    
    /// Get uptime
    fn get_uptime(&self) -> Result<u64, CompatibilityError>;
    
    /// Get battery status
    fn get_battery_status(&self) -> Result<BatteryStatus, CompatibilityError>;
}

/// Battery status information
#[derive(Debug, Clone)]
pub struct BatteryStatus {
    pub present: bool,
    pub charging: bool,
    pub level: u8,
    pub voltage: u32,
    pub current: i32,
    pub temperature: i16,
    pub health: u8,
    pub estimated_time_remaining: u32,
}

/// Desktop platform
pub struct DesktopPlatform {
    system_info: SystemInfo,
    display_configs: Vec<DisplayConfig>,
    audio_configs: Vec<AudioConfig>,
    network_config: NetworkConfig,
    power_config: PowerConfig,
    storage_config: StorageConfig,
    security_config: SecurityConfig,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        let system_info = SystemInfo {
            platform_type: PlatformType::Desktop,
            architecture: ArchitectureType::X86_64,
            cpu_count: 4,
            total_memory: 8 * 1024 * 1024 * 1024, // 8GB
            available_memory: 4 * 1024 * 1024 * 1024, // 4GB
            hardware_capabilities: HardwareCapabilities::all(),
            version: "1.0.0",
            build_number: 1,
        };
        
        let default_display = DisplayConfig {
            resolution: (1920, 1080),
            refresh_rate: 60,
            color_depth: 32,
            orientation: DisplayOrientation::Landscape,
            brightness: 100,
            contrast: 80,
        };
        
        let default_audio = AudioConfig {
            sample_rate: 44100,
            channels: 2,
            bit_depth: 16,
            buffer_size: 1024,
            device_count: 1,
            master_volume: 75,
        };
        
        let default_network = NetworkConfig {
            has_ethernet: true,
            has_wifi: true,
            has_bluetooth: true,
            ip_address: [192, 168, 1, 100],
            subnet_mask: [255, 255, 255, 0],
            gateway: [192, 168, 1, 1],
            dns_servers: [[8, 8, 8, 8], [8, 8, 4, 4], [1, 1, 1, 1]],
        };
        
        let default_power = PowerConfig {
            battery_present: false,
            ac_connected: true,
            battery_level: 0,
            battery_health: 100,
            power_source: PowerSource::AC,
            sleep_timeout: 30,
            hibernate_timeout: 120,
        };
        
        let default_storage = StorageConfig {
            total_space: 256 * 1024 * 1024 * 1024, // 256GB
            free_space: 128 * 1024 * 1024 * 1024, // 128GB
            block_size: 4096,
            is_removable: false,
            filesystem_type: "MultiFS",
        };
        
        let default_security = SecurityConfig {
            secure_boot_enabled: true,
            trusted_platform_module: true,
            encryption_supported: true,
            biometric_supported: true,
            security_level: SecurityLevel::High,
        };
        
        DesktopPlatform {
            system_info,
            display_configs: vec![default_display],
            audio_configs: vec![default_audio],
            network_config: default_network,
            power_config: default_power,
            storage_config: default_storage,
            security_config: default_security,
        }
    }
}

impl Platform for DesktopPlatform {
    fn get_system_info(&self) -> SystemInfo {
        self.system_info.clone()
    }
    
    fn get_display_config(&self) -> Result<DisplayConfig, CompatibilityError> {
        Ok(self.display_configs[0].clone())
    }
    
    fn set_display_config(&self, config: &DisplayConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting display configuration: {}x{} @ {}Hz", 
                   config.resolution.0, config.resolution.1, config.refresh_rate);
        Ok(())
    }
    
    fn get_audio_config(&self) -> Result<AudioConfig, CompatibilityError> {
        Ok(self.audio_configs[0].clone())
    }
    
    fn set_audio_config(&self, config: &AudioConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting audio configuration: {}Hz, {} channels, {} bit", 
                   config.sample_rate, config.channels, config.bit_depth);
        Ok(())
    }
    
    fn get_network_config(&self) -> Result<NetworkConfig, CompatibilityError> {
        Ok(self.network_config.clone())
    }
    
    fn set_network_config(&self, config: &NetworkConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting network configuration");
        Ok(())
    }
    
    fn get_power_config(&self) -> Result<PowerConfig, CompatibilityError> {
        Ok(self.power_config.clone())
    }
    
    fn set_power_config(&self, config: &PowerConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting power configuration");
        Ok(())
    }
    
    fn get_storage_config(&self) -> Result<StorageConfig, CompatibilityError> {
        Ok(self.storage_config.clone())
    }
    
    fn set_storage_config(&self, config: &StorageConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting storage configuration");
        Ok(())
    }
    
    fn get_security_config(&self) -> Result<SecurityConfig, CompatibilityError> {
        Ok(self.security_config.clone())
    }
    
    fn set_security_config(&self, config: &SecurityConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting security configuration");
        Ok(())
    }
    
    fn restart(&self) -> Result<(), CompatibilityError> {
        log::info!("Restarting system");
        Ok(())
    }
    
    fn shutdown(&self) -> Result<(), CompatibilityError> {
        log::info!("Shutting down system");
        Ok(())
    }
    
    fn suspend(&self) -> Result<(), CompatibilityError> {
        log::info!("Suspending system");
        Ok(())
    }
    
    fn hibernate(&self) -> Result<(), CompatibilityError> {
        log::info!("Hibernating system");
        Ok(())
    }
    
    fn get_uptime(&self) -> Result<u64, CompatibilityError> {
        Ok(1000000) // Placeholder uptime
    }
    
    fn get_battery_status(&self) -> Result<BatteryStatus, CompatibilityError> {
        Ok(BatteryStatus {
            present: false,
            charging: false,
            level: 0,
            voltage: 0,
            current: 0,
            temperature: 0,
            health: 100,
            estimated_time_remaining: 0,
        })
    }
}

/// Mobile platform
pub struct MobilePlatform {
    system_info: SystemInfo,
    display_configs: Vec<DisplayConfig>,
    audio_configs: Vec<AudioConfig>,
    network_config: NetworkConfig,
    power_config: PowerConfig,
    storage_config: StorageConfig,
    security_config: SecurityConfig,
}

impl MobilePlatform {
    pub fn new() -> Self {
        let system_info = SystemInfo {
            platform_type: PlatformType::Mobile,
            architecture: ArchitectureType::ARM64,
            cpu_count: 8,
            total_memory: 4 * 1024 * 1024 * 1024, // 4GB
            available_memory: 2 * 1024 * 1024 * 1024, // 2GB
            hardware_capabilities: HardwareCapabilities::GPU | 
                                 HardwareCapabilities::WIFI | 
                                 HardwareCapabilities::BLUETOOTH |
                                 HardwareCapabilities::TOUCHSCREEN |
                                 HardwareCapabilities::CAMERA |
                                 HardwareCapabilities::FINGERPRINT,
            version: "1.0.0",
            build_number: 1,
        };
        
        let default_display = DisplayConfig {
            resolution: (1080, 2340),
            refresh_rate: 90,
            color_depth: 32,
            orientation: DisplayOrientation::Portrait,
            brightness: 80,
            contrast: 75,
        };
        
        let default_audio = AudioConfig {
            sample_rate: 48000,
            channels: 2,
            bit_depth: 16,
            buffer_size: 512,
            device_count: 2,
            master_volume: 80,
        };
        
        let default_network = NetworkConfig {
            has_ethernet: false,
            has_wifi: true,
            has_bluetooth: true,
            ip_address: [192, 168, 1, 101],
            subnet_mask: [255, 255, 255, 0],
            gateway: [192, 168, 1, 1],
            dns_servers: [[8, 8, 8, 8], [8, 8, 4, 4], [1, 1, 1, 1]],
        };
        
        let default_power = PowerConfig {
            battery_present: true,
            ac_connected: false,
            battery_level: 85,
            battery_health: 95,
            power_source: PowerSource::Battery,
            sleep_timeout: 15,
            hibernate_timeout: 60,
        };
        
        let default_storage = StorageConfig {
            total_space: 64 * 1024 * 1024 * 1024, // 64GB
            free_space: 32 * 1024 * 1024 * 1024, // 32GB
            block_size: 4096,
            is_removable: false,
            filesystem_type: "MultiFS",
        };
        
        let default_security = SecurityConfig {
            secure_boot_enabled: true,
            trusted_platform_module: true,
            encryption_supported: true,
            biometric_supported: true,
            security_level: SecurityLevel::Maximum,
        };
        
        MobilePlatform {
            system_info,
            display_configs: vec![default_display],
            audio_configs: vec![default_audio],
            network_config: default_network,
            power_config: default_power,
            storage_config: default_storage,
            security_config: default_security,
        }
    }
}

impl Platform for MobilePlatform {
    fn get_system_info(&self) -> SystemInfo {
        self.system_info.clone()
    }
    
    fn get_display_config(&self) -> Result<DisplayConfig, CompatibilityError> {
        Ok(self.display_configs[0].clone())
    }
    
    fn set_display_config(&self, config: &DisplayConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting mobile display configuration: {}x{} @ {}Hz", 
                   config.resolution.0, config.resolution.1, config.refresh_rate);
        Ok(())
    }
    
    fn get_audio_config(&self) -> Result<AudioConfig, CompatibilityError> {
        Ok(self.audio_configs[0].clone())
    }
    
    fn set_audio_config(&self, config: &AudioConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting mobile audio configuration: {}Hz, {} channels, {} bit", 
                   config.sample_rate, config.channels, config.bit_depth);
        Ok(())
    }
    
    fn get_network_config(&self) -> Result<NetworkConfig, CompatibilityError> {
        Ok(self.network_config.clone())
    }
    
    fn set_network_config(&self, config: &NetworkConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting mobile network configuration");
        Ok(())
    }
    
    fn get_power_config(&self) -> Result<PowerConfig, CompatibilityError> {
        Ok(self.power_config.clone())
    }
    
    fn set_power_config(&self, config: &PowerConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting mobile power configuration");
        Ok(())
    }
    
    fn get_storage_config(&self) -> Result<StorageConfig, CompatibilityError> {
        Ok(self.storage_config.clone())
    }
    
    fn set_storage_config(&self, config: &StorageConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting mobile storage configuration");
        Ok(())
    }
    
    fn get_security_config(&self) -> Result<SecurityConfig, CompatibilityError> {
        Ok(self.security_config.clone())
    }
    
    fn set_security_config(&self, config: &SecurityConfig) -> Result<(), CompatibilityError> {
        log::info!("Setting mobile security configuration");
        Ok(())
    }
    
    fn restart(&self) -> Result<(), CompatibilityError> {
        log::info!("Restarting mobile system");
        Ok(())
    }
    
    fn shutdown(&self) -> Result<(), CompatibilityError> {
        log::info!("Shutting down mobile system");
        Ok(())
    }
    
    fn suspend(&self) -> Result<(), CompatibilityError> {
        log::info!("Suspending mobile system");
        Ok(())
    }
    
    fn hibernate(&self) -> Result<(), CompatibilityError> {
        log::info!("Hibernating mobile system");
        Ok(())
    }
    
    fn get_uptime(&self) -> Result<u64, CompatibilityError> {
        Ok(500000) // Placeholder uptime for mobile
    }
    
    fn get_battery_status(&self) -> Result<BatteryStatus, CompatibilityError> {
        Ok(BatteryStatus {
            present: true,
            charging: false,
            level: 85,
            voltage: 3700,
            current: 100,
            temperature: 35,
            health: 95,
            estimated_time_remaining: 240, // 4 hours
        })
    }
}

/// Global platform instance
static CURRENT_PLATFORM: spin::Mutex<Option<Box<dyn Platform>>> = spin::Mutex::new(None);

/// Initialize platform abstraction
pub fn init() -> Result<(), CompatibilityError> {
    let mut platform_lock = CURRENT_PLATFORM.lock();
    
    if platform_lock.is_some() {
        return Ok(());
    }
    
    // Determine platform type based on architecture and environment
    let arch_type = crate::get_state()
        .map(|s| s.arch_type)
        .ok_or(CompatibilityError::InitializationFailed("Compatibility state not initialized"))?;
    
    // For now, create desktop platform as default
    // In a real implementation, this would detect the actual platform
    let platform: Box<dyn Platform> = match arch_type {
        ArchitectureType::X86_64 | ArchitectureType::RISCV64 => {
            Box::new(DesktopPlatform::new())
        }
        ArchitectureType::ARM64 => {
            // Could be mobile or embedded, default to mobile
            Box::new(MobilePlatform::new())
        }
        ArchitectureType::Unknown => {
            return Err(CompatibilityError::UnsupportedArchitecture);
        }
    };
    
    let system_info = platform.get_system_info();
    log::info!("Platform abstraction initialized");
    log::info!("Platform type: {:?}", system_info.platform_type);
    log::info!("Architecture: {:?}", system_info.architecture);
    log::info!("CPU count: {}", system_info.cpu_count);
    log::info!("Total memory: {}GB", system_info.total_memory / (1024 * 1024 * 1024));
    log::info!("Hardware capabilities: {:?}", system_info.hardware_capabilities);
    
    *platform_lock = Some(platform);
    
    Ok(())
}

/// Get current platform instance
pub fn get_current_platform() -> Option<&'static Box<dyn Platform>> {
    CURRENT_PLATFORM.lock().as_ref()
}

/// Get system information
pub fn get_system_info() -> Option<SystemInfo> {
    let platform_lock = CURRENT_PLATFORM.lock();
    platform_lock.as_ref().map(|p| p.get_system_info())
}

/// Get display configuration
pub fn get_display_config() -> Result<DisplayConfig, CompatibilityError> {
    let platform_lock = CURRENT_PLATFORM.lock();
    let platform = platform_lock.as_ref()
        .ok_or(CompatibilityError::InitializationFailed("Platform not initialized"))?;
    
    platform.get_display_config()
}

/// Set display configuration
pub fn set_display_config(config: &DisplayConfig) -> Result<(), CompatibilityError> {
    let platform_lock = CURRENT_PLATFORM.lock();
    let platform = platform_lock.as_ref()
        .ok_or(CompatibilityError::InitializationFailed("Platform not initialized"))?;
    
    platform.set_display_config(config)
}

/// Convenience functions for common operations
pub fn get_battery_status() -> Result<BatteryStatus, CompatibilityError> {
    let platform_lock = CURRENT_PLATFORM.lock();
    let platform = platform_lock.as_ref()
        .ok_or(CompatibilityError::InitializationFailed("Platform not initialized"))?;
    
    platform.get_battery_status()
}

pub fn get_uptime() -> Result<u64, CompatibilityError> {
    let platform_lock = CURRENT_PLATFORM.lock();
    let platform = platform_lock.as_ref()
        .ok_or(CompatibilityError::InitializationFailed("Platform not initialized"))?;
    
    platform.get_uptime()
}