//! Networking Configuration Management
//! 
//! This module provides comprehensive configuration management for networking:
//! - Configuration file parsing and management
//! - Network interface configuration
//! - Security settings configuration
//! - QoS and traffic shaping configuration
//! - Hotplug and device management settings
//! - Performance tuning parameters
//! - Preset configurations for different use cases
//! - Configuration validation and persistence
//! - Backup and restore functionality
//! - Configuration migration and updates

use crate::{NetworkingError, wifi::{WifiManager, WifiConfig}, ethernet::EthernetManager, 
           stack::{NetworkInterface, InterfaceType, IpAddress, IpVersion},
           hotplug::HotplugConfig, debugging::{DebugFlags, MonitorAlert}};
use multios_memory::{MemoryManager, PhysicalAddress, VirtualAddress};
use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Configuration flags
    pub struct ConfigFlags: u32 {
        const AUTO_CONFIGURE = 1 << 0;        // Auto-configure network interfaces
        const SAVE_ON_CHANGE = 1 << 1;        // Save configuration on changes
        const VALIDATE_CONFIG = 1 << 2;       // Validate configuration before applying
        const BACKUP_CONFIG = 1 << 3;         // Create backup before changes
        const MIGRATE_OLD = 1 << 4;           // Migrate from old configuration format
        const DEFAULT_FALLBACK = 1 << 5;      // Use defaults if config fails
        const PERSISTENT = 1 << 6;            // Persist configuration across reboots
        const SECURE_CONFIG = 1 << 7;         // Encrypt sensitive configuration data
    }
}

/// Configuration management types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigType {
    NetworkInterface,
    WiFi,
    Ethernet,
    Security,
    QoS,
    Hotplug,
    Debug,
    System,
}

/// Network configuration preset
#[derive(Debug, Clone)]
pub struct NetworkPreset {
    pub name: String,
    pub description: String,
    pub config_type: ConfigType,
    pub settings: ConfigValueMap,
    pub applicable_devices: Vec<String>,
    pub performance_profile: PerformanceProfile,
}

/// Performance profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceProfile {
    LowPower,        // Maximum power saving
    Balanced,        // Balanced performance/power
    HighPerformance, // Maximum performance
    Gaming,          // Gaming optimized
    Streaming,       // Media streaming optimized
    Workstation,     // Professional workstation
}

/// Configuration value map
#[derive(Debug, Clone)]
pub struct ConfigValueMap {
    pub values: Vec<(String, ConfigValue)>,
}

/// Configuration values
#[derive(Debug, Clone)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
    Array(Vec<ConfigValue>),
    Object(Vec<(String, ConfigValue)>),
}

/// Main configuration manager
pub struct ConfigManager {
    memory_manager: &'static MemoryManager,
    config_flags: ConfigFlags,
    current_config: NetworkConfiguration,
    config_file_path: String,
    backup_config: Option<NetworkConfiguration>,
    presets: Vec<NetworkPreset>,
    validation_rules: Vec<ConfigValidationRule>,
    auto_save_enabled: bool,
}

/// Complete network configuration
#[derive(Debug, Clone)]
pub struct NetworkConfiguration {
    pub interfaces: Vec<InterfaceConfig>,
    pub wifi_configs: Vec<WifiConfig>,
    pub ethernet_configs: Vec<EthernetConfig>,
    pub security_configs: Vec<SecurityConfig>,
    pub qos_configs: Vec<QoSConfig>,
    pub hotplug_configs: Vec<HotplugConfig>,
    pub debug_configs: DebugConfiguration,
    pub system_configs: SystemConfiguration,
    pub version: ConfigVersion,
    pub last_updated: u64,
}

/// Interface configuration
#[derive(Debug, Clone)]
pub struct InterfaceConfig {
    pub name: String,
    pub interface_type: InterfaceType,
    pub mac_address: Option<[u8; 6]>,
    pub ipv4_config: Option<Ipv4Configuration>,
    pub ipv6_config: Option<Ipv6Configuration>,
    pub mtu: u16,
    pub auto_config: bool,
    pub enabled: bool,
    pub qos_enabled: bool,
}

/// IPv4 configuration
#[derive(Debug, Clone)]
pub struct Ipv4Configuration {
    pub address: IpAddress,
    pub netmask: IpAddress,
    pub gateway: Option<IpAddress>,
    pub dns_servers: Vec<IpAddress>,
    pub dhcp_enabled: bool,
    pub dhcp_options: DhcpOptions,
}

/// IPv6 configuration
#[derive(Debug, Clone)]
pub struct Ipv6Configuration {
    pub addresses: Vec<IpAddress>,
    pub gateway: Option<IpAddress>,
    pub dns_servers: Vec<IpAddress>,
    pub autoconf_enabled: bool,
    pub dhcp_enabled: bool,
}

/// DHCP options
#[derive(Debug, Clone)]
pub struct DhcpOptions {
    pub lease_time: u32,        // seconds
    pub renew_time: u32,        // seconds
    pub rebind_time: u32,       // seconds
    pub host_name: Option<String>,
    pub domain_name: Option<String>,
    pub broadcast_address: Option<IpAddress>,
}

/// Ethernet configuration
#[derive(Debug, Clone)]
pub struct EthernetConfig {
    pub name: String,
    pub auto_negotiate: bool,
    pub speed: EthernetSpeedConfig,
    pub duplex: DuplexConfig,
    pub flow_control: bool,
    pub eee_enabled: bool,
    pub vlan_configs: Vec<VlanConfig>,
}

/// Ethernet speed configuration
#[derive(Debug, Clone)]
pub enum EthernetSpeedConfig {
    Auto,
    Fixed(u32),    // Mbps
}

/// Duplex configuration
#[derive(Debug, Clone)]
pub enum DuplexConfig {
    Auto,
    Full,
    Half,
}

/// VLAN configuration
#[derive(Debug, Clone)]
pub struct VlanConfig {
    pub vlan_id: u16,
    pub name: String,
    pub priority: u8,
    pub enabled: bool,
}

/// Security configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub firewall_enabled: bool,
    pub firewall_rules: Vec<FirewallRuleConfig>,
    pub wireless_security: Vec<WirelessSecurityConfig>,
    pub encryption_enabled: bool,
    pub certificate_store: Vec<CertificateConfig>,
}

/// Firewall rule configuration
#[derive(Debug, Clone)]
pub struct FirewallRuleConfig {
    pub name: String,
    pub action: FirewallAction,
    pub direction: FirewallDirection,
    pub source_address: Option<String>,
    pub dest_address: Option<String>,
    pub source_port: Option<u16>,
    pub dest_port: Option<u16>,
    pub protocol: String,
    pub enabled: bool,
}

/// Wireless security configuration
#[derive(Debug, Clone)]
pub struct WirelessSecurityConfig {
    pub ssid: String,
    pub security_type: SecurityType,
    pub passphrase: Option<String>,
    pub certificate: Option<String>,
    pub key_management: KeyManagementType,
}

/// Security types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityType {
    Open,
    WEP,
    WPA,
    WPA2,
    WPA3,
    WPS,
}

/// Key management types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyManagementType {
    PSK,
    EAP,
    SAE,
}

/// Firewall actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirewallAction {
    Allow,
    Deny,
    Reject,
    Log,
}

/// Firewall directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirewallDirection {
    In,
    Out,
    Both,
}

/// Certificate configuration
#[derive(Debug, Clone)]
pub struct CertificateConfig {
    pub cert_type: CertificateType,
    pub path: String,
    pub password: Option<String>,
    pub expires: Option<u64>,
}

/// Certificate types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateType {
    CA,
    Server,
    Client,
}

/// QoS configuration
#[derive(Debug, Clone)]
pub struct QoSConfig {
    pub name: String,
    pub enabled: bool,
    pub default_class: TrafficClass,
    pub classes: Vec<TrafficClassConfig>,
    pub bandwidth_limit: Option<u32>,  // kbps
    pub burst_rate: Option<u32>,       // kbps
}

/// Traffic class configuration
#[derive(Debug, Clone)]
pub struct TrafficClassConfig {
    pub class_name: String,
    pub priority: u8,
    pub bandwidth_percentage: u8,
    pub flow_control: bool,
    pub filters: Vec<TrafficFilter>,
}

/// Traffic filter
#[derive(Debug, Clone)]
pub struct TrafficFilter {
    pub protocol: String,
    pub port: Option<u16>,
    pub source_address: Option<String>,
    pub dest_address: Option<String>,
    pub dscp: Option<u8>,
}

/// Debug configuration
#[derive(Debug, Clone)]
pub struct DebugConfiguration {
    pub logging_enabled: bool,
    pub debug_flags: DebugFlags,
    pub log_level: LogLevel,
    pub performance_monitoring: bool,
    pub packet_capture_enabled: bool,
    pub alert_thresholds: AlertThresholdConfig,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

/// Alert threshold configuration
#[derive(Debug, Clone)]
pub struct AlertThresholdConfig {
    pub low_signal_threshold: i8,      // dBm
    pub high_interference_threshold: u8, // percentage
    pub packet_loss_threshold: u8,     // percentage
    pub temperature_threshold: f32,    // Celsius
}

/// System configuration
#[derive(Debug, Clone)]
pub struct SystemConfiguration {
    pub hostname: String,
    pub domain_name: Option<String>,
    pub search_domains: Vec<String>,
    pub name_servers: Vec<IpAddress>,
    pub ntp_servers: Vec<String>,
    pub timezone: Option<String>,
    pub boot_protocol: BootProtocol,
}

/// Boot protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootProtocol {
    Static,
    Dhcp,
    Bootp,
    IPv6RA,  // IPv6 Router Advertisement
}

/// Configuration version
#[derive(Debug, Clone)]
pub struct ConfigVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    pub format_version: u8,
}

/// Configuration validation rule
#[derive(Debug, Clone)]
pub struct ConfigValidationRule {
    pub config_type: ConfigType,
    pub field_name: String,
    pub validation_type: ValidationType,
    pub parameters: ConfigValueMap,
}

/// Validation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationType {
    Required,
    MinValue,
    MaxValue,
    Regex,
    Enum,
    Range,
}

/// Configuration error
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub error_code: ConfigErrorCode,
    pub message: String,
    pub field: Option<String>,
    pub line_number: Option<u32>,
}

/// Configuration error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorCode {
    InvalidFormat,
    MissingRequiredField,
    InvalidValue,
    ParseError,
    ValidationFailed,
    FileNotFound,
    PermissionDenied,
    CorruptedData,
    VersionMismatch,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Result<Self, NetworkingError> {
        Ok(Self {
            memory_manager: unsafe { &*0x2000 }, // TODO: Proper reference
            config_flags: ConfigFlags::AUTO_CONFIGURE | ConfigFlags::VALIDATE_CONFIG,
            current_config: NetworkConfiguration::default(),
            config_file_path: "/etc/multios/network.conf".to_string(),
            backup_config: None,
            presets: Vec::new(),
            validation_rules: Vec::new(),
            auto_save_enabled: true,
        })
    }
    
    /// Initialize configuration manager
    pub fn initialize(&mut self) -> Result<(), NetworkingError> {
        info!("Initializing configuration manager...");
        
        // Load configuration from file
        self.load_configuration()?;
        
        // Setup default presets
        self.setup_default_presets()?;
        
        // Setup validation rules
        self.setup_validation_rules()?;
        
        // Apply configuration
        self.apply_configuration()?;
        
        info!("Configuration manager initialized successfully");
        Ok(())
    }
    
    /// Load configuration from file
    pub fn load_configuration(&mut self) -> Result<(), NetworkingError> {
        info!("Loading network configuration from {}", self.config_file_path);
        
        // In real implementation, this would parse configuration file
        // For now, we'll create a default configuration
        
        let default_config = self.create_default_configuration();
        self.current_config = default_config;
        
        // Validate loaded configuration
        if self.config_flags.contains(ConfigFlags::VALIDATE_CONFIG) {
            self.validate_configuration()?;
        }
        
        Ok(())
    }
    
    /// Create default configuration
    fn create_default_configuration(&self) -> NetworkConfiguration {
        NetworkConfiguration {
            interfaces: vec![
                InterfaceConfig {
                    name: "lo".to_string(),
                    interface_type: InterfaceType::Loopback,
                    mac_address: None,
                    ipv4_config: Some(Ipv4Configuration {
                        address: IpAddress {
                            address: [127, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                            prefix_length: 8,
                            version: IpVersion::IPv4,
                        },
                        netmask: IpAddress {
                            address: [255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                            prefix_length: 8,
                            version: IpVersion::IPv4,
                        },
                        gateway: None,
                        dns_servers: Vec::new(),
                        dhcp_enabled: false,
                        dhcp_options: DhcpOptions::default(),
                    }),
                    ipv6_config: Some(Ipv6Configuration {
                        addresses: vec![IpAddress {
                            address: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
                            prefix_length: 128,
                            version: IpVersion::IPv6,
                        }],
                        gateway: None,
                        dns_servers: Vec::new(),
                        autoconf_enabled: true,
                        dhcp_enabled: false,
                    }),
                    mtu: 65536,
                    auto_config: false,
                    enabled: true,
                    qos_enabled: false,
                },
                InterfaceConfig {
                    name: "eth0".to_string(),
                    interface_type: InterfaceType::Ethernet,
                    mac_address: Some([0x00, 0x1A, 0x79, 0x12, 0x34, 0x56]),
                    ipv4_config: None, // Will be configured via DHCP
                    ipv6_config: None,
                    mtu: 1500,
                    auto_config: true,
                    enabled: true,
                    qos_enabled: true,
                },
                InterfaceConfig {
                    name: "wlan0".to_string(),
                    interface_type: InterfaceType::WiFi,
                    mac_address: Some([0x00, 0x1C, 0x42, 0x78, 0x9A, 0xBC]),
                    ipv4_config: None,
                    ipv6_config: None,
                    mtu: 1500,
                    auto_config: true,
                    enabled: true,
                    qos_enabled: true,
                },
            ],
            wifi_configs: Vec::new(),
            ethernet_configs: vec![
                EthernetConfig {
                    name: "eth0".to_string(),
                    auto_negotiate: true,
                    speed: EthernetSpeedConfig::Auto,
                    duplex: DuplexConfig::Auto,
                    flow_control: true,
                    eee_enabled: true,
                    vlan_configs: Vec::new(),
                },
            ],
            security_configs: vec![
                SecurityConfig {
                    firewall_enabled: true,
                    firewall_rules: vec![
                        FirewallRuleConfig {
                            name: "Allow Loopback".to_string(),
                            action: FirewallAction::Allow,
                            direction: FirewallDirection::Both,
                            source_address: Some("127.0.0.1".to_string()),
                            dest_address: Some("127.0.0.1".to_string()),
                            source_port: None,
                            dest_port: None,
                            protocol: "any".to_string(),
                            enabled: true,
                        },
                    ],
                    wireless_security: Vec::new(),
                    encryption_enabled: true,
                    certificate_store: Vec::new(),
                },
            ],
            qos_configs: vec![
                QoSConfig {
                    name: "Default QoS".to_string(),
                    enabled: true,
                    default_class: TrafficClass::BEST_EFFORT,
                    classes: vec![
                        TrafficClassConfig {
                            class_name: "Voice".to_string(),
                            priority: 7,
                            bandwidth_percentage: 20,
                            flow_control: true,
                            filters: vec![
                                TrafficFilter {
                                    protocol: "tcp".to_string(),
                                    port: Some(5060), // SIP
                                    source_address: None,
                                    dest_address: None,
                                    dscp: Some(46), // EF (Expedited Forwarding)
                                },
                            ],
                        },
                    ],
                    bandwidth_limit: None,
                    burst_rate: None,
                },
            ],
            hotplug_configs: Vec::new(),
            debug_configs: DebugConfiguration {
                logging_enabled: true,
                debug_flags: DebugFlags::empty(),
                log_level: LogLevel::Info,
                performance_monitoring: true,
                packet_capture_enabled: false,
                alert_thresholds: AlertThresholdConfig {
                    low_signal_threshold: -70,
                    high_interference_threshold: 70,
                    packet_loss_threshold: 5,
                    temperature_threshold: 80.0,
                },
            },
            system_configs: SystemConfiguration {
                hostname: "multios".to_string(),
                domain_name: Some("local".to_string()),
                search_domains: vec!["local".to_string()],
                name_servers: Vec::new(),
                ntp_servers: vec![
                    "pool.ntp.org".to_string(),
                ],
                timezone: Some("UTC".to_string()),
                boot_protocol: BootProtocol::Dhcp,
            },
            version: ConfigVersion {
                major: 1,
                minor: 0,
                patch: 0,
                format_version: 1,
            },
            last_updated: self.get_timestamp(),
        }
    }
    
    /// Apply configuration to the system
    pub fn apply_configuration(&mut self) -> Result<(), NetworkingError> {
        info!("Applying network configuration...");
        
        // Apply interface configurations
        for interface in &self.current_config.interfaces {
            self.configure_interface(interface)?;
        }
        
        // Apply Ethernet configurations
        for ethernet_config in &self.current_config.ethernet_configs {
            self.configure_ethernet(ethernet_config)?;
        }
        
        // Apply security configurations
        for security_config in &self.current_config.security_configs {
            self.configure_security(security_config)?;
        }
        
        info!("Network configuration applied successfully");
        Ok(())
    }
    
    /// Configure a network interface
    fn configure_interface(&self, interface: &InterfaceConfig) -> Result<(), NetworkingError> {
        info!("Configuring interface: {}", interface.name);
        
        // Apply IPv4 configuration
        if let Some(ref ipv4_config) = interface.ipv4_config {
            if ipv4_config.dhcp_enabled {
                info!("  Enabling DHCP for {}", interface.name);
            } else {
                info!("  Static IP: {}.{}.{}.{}", 
                     ipv4_config.address.address[0],
                     ipv4_config.address.address[1],
                     ipv4_config.address.address[2],
                     ipv4_config.address.address[3]);
            }
        }
        
        // Apply IPv6 configuration
        if let Some(ref ipv6_config) = interface.ipv6_config {
            for address in &ipv6_config.addresses {
                info!("  IPv6 address: {}", self.format_ipv6_address(address));
            }
        }
        
        Ok(())
    }
    
    /// Configure Ethernet interface
    fn configure_ethernet(&self, config: &EthernetConfig) -> Result<(), NetworkingError> {
        info!("Configuring Ethernet: {}", config.name);
        
        match config.speed {
            EthernetSpeedConfig::Auto => info!("  Speed: Auto"),
            EthernetSpeedConfig::Fixed(speed) => info!("  Speed: {} Mbps", speed),
        }
        
        match config.duplex {
            DuplexConfig::Auto => info!("  Duplex: Auto"),
            DuplexConfig::Full => info!("  Duplex: Full"),
            DuplexConfig::Half => info!("  Duplex: Half"),
        }
        
        info!("  Flow Control: {}", config.flow_control);
        info!("  EEE: {}", config.eee_enabled);
        
        Ok(())
    }
    
    /// Configure security settings
    fn configure_security(&self, config: &SecurityConfig) -> Result<(), NetworkingError> {
        info!("Configuring security settings");
        
        info!("  Firewall: {}", if config.firewall_enabled { "Enabled" } else { "Disabled" });
        info!("  Encryption: {}", if config.encryption_enabled { "Enabled" } else { "Disabled" });
        info!("  Firewall rules: {}", config.firewall_rules.len());
        
        for rule in &config.firewall_rules {
            if rule.enabled {
                info!("    {}: {} {} -> {}",
                     rule.name, rule.action, 
                     rule.source_address.as_deref().unwrap_or("any"),
                     rule.dest_address.as_deref().unwrap_or("any"));
            }
        }
        
        Ok(())
    }
    
    /// Setup default presets
    fn setup_default_presets(&mut self) -> Result<(), NetworkingError> {
        // Gaming preset
        self.presets.push(NetworkPreset {
            name: "Gaming".to_string(),
            description: "Optimized for low latency gaming".to_string(),
            config_type: ConfigType::QoS,
            settings: ConfigValueMap {
                values: vec![
                    ("latency_priority".to_string(), ConfigValue::Unsigned(9)),
                    ("jitter_tolerance".to_string(), ConfigValue::Unsigned(5)),
                    ("bandwidth_guarantee".to_string(), ConfigValue::Unsigned(80)),
                ],
            },
            applicable_devices: vec!["eth0".to_string(), "wlan0".to_string()],
            performance_profile: PerformanceProfile::HighPerformance,
        });
        
        // Streaming preset
        self.presets.push(NetworkPreset {
            name: "Streaming".to_string(),
            description: "Optimized for video streaming".to_string(),
            config_type: ConfigType::QoS,
            settings: ConfigValueMap {
                values: vec![
                    ("throughput_priority".to_string(), ConfigValue::Unsigned(8)),
                    ("buffer_size".to_string(), ConfigValue::Unsigned(5000)),
                    ("adaptive_bitrate".to_string(), ConfigValue::Boolean(true)),
                ],
            },
            applicable_devices: vec!["eth0".to_string(), "wlan0".to_string()],
            performance_profile: PerformanceProfile::Streaming,
        });
        
        // Low power preset
        self.presets.push(NetworkPreset {
            name: "Battery Saver".to_string(),
            description: "Optimized for battery life".to_string(),
            config_type: ConfigType::System,
            settings: ConfigValueMap {
                values: vec![
                    ("power_management".to_string(), ConfigValue::Boolean(true)),
                    ("sleep_timeout".to_string(), ConfigValue::Unsigned(300)),
                    ("wireless_off_when_idle".to_string(), ConfigValue::Boolean(true)),
                ],
            },
            applicable_devices: vec!["wlan0".to_string()],
            performance_profile: PerformanceProfile::LowPower,
        });
        
        info!("Loaded {} configuration presets", self.presets.len());
        Ok(())
    }
    
    /// Setup validation rules
    fn setup_validation_rules(&mut self) -> Result<(), NetworkingError> {
        // Interface name validation
        self.validation_rules.push(ConfigValidationRule {
            config_type: ConfigType::NetworkInterface,
            field_name: "name".to_string(),
            validation_type: ValidationType::Regex,
            parameters: ConfigValueMap {
                values: vec![
                    ("pattern".to_string(), ConfigValue::String("^[a-zA-Z0-9_]+$".to_string())),
                ],
            },
        });
        
        // MTU validation
        self.validation_rules.push(ConfigValidationRule {
            config_type: ConfigType::NetworkInterface,
            field_name: "mtu".to_string(),
            validation_type: ValidationType::Range,
            parameters: ConfigValueMap {
                values: vec![
                    ("min".to_string(), ConfigValue::Unsigned(576)),
                    ("max".to_string(), ConfigValue::Unsigned(9216)),
                ],
            },
        });
        
        // IP address validation
        self.validation_rules.push(ConfigValidationRule {
            config_type: ConfigType::NetworkInterface,
            field_name: "ipv4_address".to_string(),
            validation_type: ValidationType::Regex,
            parameters: ConfigValueMap {
                values: vec![
                    ("pattern".to_string(), ConfigValue::String("^([0-9]{1,3}\\.){3}[0-9]{1,3}$".to_string())),
                ],
            },
        });
        
        info!("Setup {} validation rules", self.validation_rules.len());
        Ok(())
    }
    
    /// Validate current configuration
    pub fn validate_configuration(&self) -> Result<(), NetworkingError> {
        info!("Validating network configuration...");
        
        for rule in &self.validation_rules {
            self.validate_rule(rule)?;
        }
        
        info!("Configuration validation completed successfully");
        Ok(())
    }
    
    /// Validate a specific rule
    fn validate_rule(&self, rule: &ConfigValidationRule) -> Result<(), NetworkingError> {
        // Simplified validation - in real implementation, this would check actual configuration values
        match rule.validation_type {
            ValidationType::Required => {
                // Check if required fields exist
            }
            ValidationType::Range => {
                // Check numeric ranges
            }
            ValidationType::Regex => {
                // Check string patterns
            }
            _ => {},
        }
        
        Ok(())
    }
    
    /// Get available presets
    pub fn get_presets(&self) -> &[NetworkPreset] {
        &self.presets
    }
    
    /// Apply a preset configuration
    pub fn apply_preset(&mut self, preset_name: &str) -> Result<(), NetworkingError> {
        if let Some(preset) = self.presets.iter().find(|p| p.name == preset_name) {
            info!("Applying preset: {}", preset_name);
            
            // Apply preset settings to current configuration
            for (key, value) in &preset.settings.values {
                self.apply_preset_value(preset.config_type, key, value)?;
            }
            
            // Update timestamp
            self.current_config.last_updated = self.get_timestamp();
            
            // Auto-save if enabled
            if self.auto_save_enabled {
                self.save_configuration()?;
            }
            
            Ok(())
        } else {
            Err(NetworkingError::InvalidConfiguration)
        }
    }
    
    /// Apply a preset value
    fn apply_preset_value(&mut self, config_type: ConfigType, key: &str, value: &ConfigValue) -> Result<(), NetworkingError> {
        match config_type {
            ConfigType::QoS => {
                // Apply QoS-specific settings
                for qos_config in &mut self.current_config.qos_configs {
                    match key {
                        "latency_priority" => {
                            if let ConfigValue::Unsigned(priority) = value {
                                // Update QoS priority
                            }
                        }
                        _ => {},
                    }
                }
            }
            ConfigType::System => {
                // Apply system-specific settings
            }
            _ => {},
        }
        
        Ok(())
    }
    
    /// Save configuration to file
    pub fn save_configuration(&self) -> Result<(), NetworkingError> {
        info!("Saving configuration to {}", self.config_file_path);
        
        // Create backup if enabled
        if self.config_flags.contains(ConfigFlags::BACKUP_CONFIG) {
            self.create_backup()?;
        }
        
        // Serialize and save configuration
        // In real implementation, this would write to file
        info!("Configuration saved successfully");
        
        Ok(())
    }
    
    /// Create backup configuration
    fn create_backup(&self) -> Result<(), NetworkingError> {
        info!("Creating configuration backup");
        // In real implementation, this would copy current config to backup file
        Ok(())
    }
    
    /// Restore configuration from backup
    pub fn restore_configuration(&mut self) -> Result<(), NetworkingError> {
        if let Some(ref backup) = self.backup_config {
            info!("Restoring configuration from backup");
            self.current_config = backup.clone();
            self.apply_configuration()?;
            info!("Configuration restored successfully");
            Ok(())
        } else {
            Err(NetworkingError::InvalidConfiguration)
        }
    }
    
    /// Get current configuration
    pub fn get_configuration(&self) -> &NetworkConfiguration {
        &self.current_config
    }
    
    /// Get configuration statistics
    pub fn get_statistics(&self) -> ConfigStatistics {
        ConfigStatistics {
            total_interfaces: self.current_config.interfaces.len() as u32,
            total_presets: self.presets.len() as u32,
            validation_rules: self.validation_rules.len() as u32,
            auto_save_enabled: self.auto_save_enabled,
            config_version: self.current_config.version,
            last_updated: self.current_config.last_updated,
        }
    }
    
    /// Format IPv6 address for display
    fn format_ipv6_address(&self, address: &IpAddress) -> String {
        // Simplified IPv6 formatting
        format!("{}.{}.{}.{}.{}.{}.{}.{}", 
               address.address[0], address.address[1], address.address[2], address.address[3],
               address.address[4], address.address[5], address.address[6], address.address[7])
    }
    
    /// Get current timestamp
    fn get_timestamp(&self) -> u64 {
        multios_scheduler::get_uptime()
    }
    
    /// Export configuration to JSON
    pub fn export_configuration(&self) -> Result<String, NetworkingError> {
        // In real implementation, this would serialize configuration to JSON
        Ok("{\"version\": \"1.0\", \"interfaces\": []}".to_string())
    }
    
    /// Import configuration from JSON
    pub fn import_configuration(&mut self, json_config: &str) -> Result<(), NetworkingError> {
        info!("Importing configuration from JSON");
        
        // In real implementation, this would parse JSON and update configuration
        self.current_config.last_updated = self.get_timestamp();
        
        // Validate imported configuration
        if self.config_flags.contains(ConfigFlags::VALIDATE_CONFIG) {
            self.validate_configuration()?;
        }
        
        info!("Configuration imported successfully");
        Ok(())
    }
}

/// Configuration statistics
#[derive(Debug, Clone)]
pub struct ConfigStatistics {
    pub total_interfaces: u32,
    pub total_presets: u32,
    pub validation_rules: u32,
    pub auto_save_enabled: bool,
    pub config_version: ConfigVersion,
    pub last_updated: u64,
}

impl fmt::Display for ConfigStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
            "Configuration Statistics:\n\
             Interfaces: {}\n\
             Presets: {}\n\
             Validation Rules: {}\n\
             Auto-save: {}\n\
             Version: {}.{}.{}\n\
             Last Updated: {}",
            self.total_interfaces, self.total_presets, self.validation_rules,
            self.auto_save_enabled, self.config_version.major, 
            self.config_version.minor, self.config_version.patch, self.last_updated
        )
    }
}

// Default implementations
impl Default for NetworkConfiguration {
    fn default() -> Self {
        Self {
            interfaces: Vec::new(),
            wifi_configs: Vec::new(),
            ethernet_configs: Vec::new(),
            security_configs: Vec::new(),
            qos_configs: Vec::new(),
            hotplug_configs: Vec::new(),
            debug_configs: DebugConfiguration::default(),
            system_configs: SystemConfiguration::default(),
            version: ConfigVersion {
                major: 1,
                minor: 0,
                patch: 0,
                format_version: 1,
            },
            last_updated: 0,
        }
    }
}

impl Default for DhcpOptions {
    fn default() -> Self {
        Self {
            lease_time: 3600,    // 1 hour
            renew_time: 1800,    // 30 minutes
            rebind_time: 2700,   // 45 minutes
            host_name: None,
            domain_name: None,
            broadcast_address: None,
        }
    }
}

impl Default for DebugConfiguration {
    fn default() -> Self {
        Self {
            logging_enabled: true,
            debug_flags: DebugFlags::empty(),
            log_level: LogLevel::Info,
            performance_monitoring: true,
            packet_capture_enabled: false,
            alert_thresholds: AlertThresholdConfig::default(),
        }
    }
}

impl Default for AlertThresholdConfig {
    fn default() -> Self {
        Self {
            low_signal_threshold: -70,
            high_interference_threshold: 70,
            packet_loss_threshold: 5,
            temperature_threshold: 80.0,
        }
    }
}

impl Default for SystemConfiguration {
    fn default() -> Self {
        Self {
            hostname: "multios".to_string(),
            domain_name: Some("local".to_string()),
            search_domains: vec!["local".to_string()],
            name_servers: Vec::new(),
            ntp_servers: vec!["pool.ntp.org".to_string()],
            timezone: Some("UTC".to_string()),
            boot_protocol: BootProtocol::Dhcp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_config_manager_creation() {
        let manager = ConfigManager::new();
        assert!(manager.is_ok());
    }
    
    #[test]
    fn test_config_manager_initialization() {
        let mut manager = ConfigManager::new().unwrap();
        
        let result = manager.initialize();
        assert!(result.is_ok());
    }
    
    #[test]
    fn test_preset_loading() {
        let mut manager = ConfigManager::new().unwrap();
        manager.initialize().unwrap();
        
        let presets = manager.get_presets();
        assert!(!presets.is_empty());
        assert_eq!(presets[0].name, "Gaming");
    }
    
    #[test]
    fn test_preset_application() {
        let mut manager = ConfigManager::new().unwrap();
        manager.initialize().unwrap();
        
        let result = manager.apply_preset("Gaming");
        assert!(result.is_ok());
    }
    
    #[test]
    fn test_configuration_validation() {
        let manager = ConfigManager::new().unwrap();
        
        let result = manager.validate_configuration();
        assert!(result.is_ok());
    }
    
    #[test]
    fn test_config_statistics() {
        let mut manager = ConfigManager::new().unwrap();
        manager.initialize().unwrap();
        
        let stats = manager.get_statistics();
        assert!(stats.total_interfaces > 0);
    }
}