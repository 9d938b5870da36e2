//! Update Compatibility Checking Module
//! 
//! Provides comprehensive compatibility checking for system updates, including
//! hardware compatibility, software compatibility, and system requirements validation.

use alloc::vec::Vec;
use alloc::string::String;
use crate::{KernelResult, KernelError, log::{info, warn, error}};

/// System requirements specification
#[derive(Debug, Clone)]
pub struct SystemRequirements {
    pub min_kernel_version: Option<String>,
    pub min_memory_mb: Option<usize>,
    pub min_disk_space_mb: Option<usize>,
    pub required_cpu_features: Vec<String>,
    pub required_drivers: Vec<String>,
    pub required_services: Vec<String>,
    pub max_incompatible_packages: Vec<String>,
}

/// Hardware compatibility information
#[derive(Debug, Clone)]
pub struct HardwareCompatibility {
    pub cpu_architecture: String,
    pub cpu_features_required: Vec<String>,
    pub memory_requirements: HardwareMemory,
    pub storage_requirements: HardwareStorage,
    pub network_requirements: HardwareNetwork,
    pub peripheral_requirements: Vec<PeripheralRequirement>,
}

/// Hardware memory requirements
#[derive(Debug, Clone)]
pub struct HardwareMemory {
    pub min_total_mb: usize,
    pub min_available_mb: usize,
    pub recommended_mb: usize,
    pub memory_type_required: Option<String>,
}

/// Hardware storage requirements
#[derive(Debug, Clone)]
pub struct HardwareStorage {
    pub min_free_space_mb: usize,
    pub recommended_free_space_mb: usize,
    pub filesystem_types: Vec<String>,
    pub max_partition_count: Option<usize>,
}

/// Hardware network requirements
#[derive(Debug, Clone)]
pub struct HardwareNetwork {
    pub network_interface_required: bool,
    pub minimum_bandwidth_mbps: Option<u32>,
    pub protocol_support: Vec<String>,
}

/// Peripheral requirement specification
#[derive(Debug, Clone)]
pub struct PeripheralRequirement {
    pub device_type: String,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
    pub min_driver_version: Option<String>,
}

/// Software compatibility information
#[derive(Debug, Clone)]
pub struct SoftwareCompatibility {
    pub os_version_min: String,
    pub os_version_max: Option<String>,
    pub required_packages: Vec<PackageRequirement>,
    pub incompatible_packages: Vec<PackageRequirement>,
    pub required_services: Vec<ServiceRequirement>,
    pub blocked_services: Vec<String>,
}

/// Package requirement specification
#[derive(Debug, Clone)]
pub struct PackageRequirement {
    pub package_name: String,
    pub min_version: Option<String>,
    pub max_version: Option<String>,
    pub exact_version: Option<String>,
    pub required: bool,
}

/// Service requirement specification
#[derive(Debug, Clone)]
pub struct ServiceRequirement {
    pub service_name: String,
    pub min_version: Option<String>,
    pub required: bool,
    pub must_be_running: bool,
}

/// Compatibility check result
#[derive(Debug, Clone)]
pub struct CompatibilityResult {
    pub compatible: bool,
    pub compatibility_score: u8, // 0-100
    pub issues: Vec<CompatibilityIssue>,
    pub warnings: Vec<CompatibilityWarning>,
    pub recommendations: Vec<CompatibilityRecommendation>,
}

/// Compatibility issue types
#[derive(Debug, Clone)]
pub struct CompatibilityIssue {
    pub issue_type: IssueType,
    pub component: String,
    pub description: String,
    pub severity: IssueSeverity,
    pub blocking: bool,
    pub possible_solutions: Vec<String>,
}

/// Compatibility warning types
#[derive(Debug, Clone)]
pub struct CompatibilityWarning {
    pub warning_type: WarningType,
    pub component: String,
    pub description: String,
    pub impact: String,
    pub mitigation: Option<String>,
}

/// Compatibility recommendation types
#[derive(Debug, Clone)]
pub struct CompatibilityRecommendation {
    pub recommendation_type: RecommendationType,
    pub component: String,
    pub title: String,
    pub description: String,
    pub priority: u8,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Issue type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    HardwareIncompatible,
    SoftwareIncompatible,
    MissingDependency,
    VersionConflict,
    ResourceInsufficient,
    ServiceUnavailable,
    PermissionDenied,
    ConfigurationInvalid,
    DriverMissing,
    NetworkUnavailable,
}

/// Warning type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    PerformanceImpact,
    FeatureUnavailable,
    ConfigurationChange,
    ServiceRestart,
    DataMigration,
    TemporaryDowntime,
    AdditionalSteps,
}

/// Recommendation type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationType {
    PerformanceOptimization,
    ConfigurationAdjustment,
    AdditionalSetup,
    BackupRequired,
    TestingRecommended,
    Documentation,
}

/// Compatibility checker for system updates
pub struct CompatibilityChecker {
    system_info: SystemInfo,
    hardware_specs: HardwareCompatibility,
    software_specs: SoftwareCompatibility,
    current_configuration: CurrentConfiguration,
}

/// System information gathering
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub kernel_version: String,
    pub os_name: String,
    pub os_version: String,
    pub architecture: String,
    pub cpu_model: String,
    pub cpu_features: Vec<String>,
    pub total_memory_mb: usize,
    pub available_memory_mb: usize,
    pub total_disk_mb: usize,
    pub free_disk_mb: usize,
    pub installed_packages: Vec<InstalledPackage>,
    pub running_services: Vec<RunningService>,
    pub active_drivers: Vec<ActiveDriver>,
}

/// Installed package information
#[derive(Debug, Clone)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
    pub architecture: String,
    pub install_date: u64,
    pub size_mb: usize,
}

/// Running service information
#[derive(Debug, Clone)]
pub struct RunningService {
    pub name: String,
    pub version: String,
    pub status: ServiceStatus,
    pub pid: Option<u32>,
}

/// Active driver information
#[derive(Debug, Clone)]
pub struct ActiveDriver {
    pub name: String,
    pub version: String,
    pub device_type: String,
    pub vendor: Option<String>,
}

/// Service status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Running,
    Stopped,
    Failed,
    Restarting,
    Disabled,
}

/// Current system configuration
#[derive(Debug, Clone)]
pub struct CurrentConfiguration {
    pub kernel_parameters: Vec<KernelParameter>,
    pub network_config: NetworkConfiguration,
    pub security_settings: SecurityConfiguration,
    pub storage_config: StorageConfiguration,
}

/// Kernel parameter specification
#[derive(Debug, Clone)]
pub struct KernelParameter {
    pub name: String,
    pub value: String,
    pub description: String,
}

/// Network configuration
#[derive(Debug, Clone)]
pub struct NetworkConfiguration {
    pub interfaces: Vec<NetworkInterface>,
    pub routing_table: Vec<Route>,
    pub dns_servers: Vec<String>,
}

/// Network interface specification
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    pub name: String,
    pub interface_type: String,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub status: NetworkStatus,
}

/// Network status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Up,
    Down,
    Unknown,
}

/// Route specification
#[derive(Debug, Clone)]
pub struct Route {
    pub destination: String,
    pub gateway: Option<String>,
    pub interface: String,
}

/// Security configuration
#[derive(Debug, Clone)]
pub struct SecurityConfiguration {
    pub firewall_enabled: bool,
    pub selinux_enabled: bool,
    pub apparmor_enabled: bool,
    pub encryption_enabled: bool,
    pub secure_boot_enabled: bool,
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfiguration {
    pub filesystems: Vec<Filesystem>,
    pub lvm_configured: bool,
    pub raid_configured: bool,
}

/// Filesystem specification
#[derive(Debug, Clone)]
pub struct Filesystem {
    pub device: String,
    pub mount_point: String,
    pub filesystem_type: String,
    pub total_size_mb: usize,
    pub free_size_mb: usize,
}

impl CompatibilityChecker {
    /// Create a new compatibility checker
    pub fn new() -> Self {
        Self {
            system_info: Self::gather_system_info(),
            hardware_specs: Self::get_hardware_specs(),
            software_specs: Self::get_software_specs(),
            current_configuration: Self::gather_current_config(),
        }
    }

    /// Check compatibility for an update
    pub fn check_update_compatibility(&self, update_requirements: &SystemRequirements) -> CompatibilityResult {
        info!("Checking compatibility for update");
        
        let mut result = CompatibilityResult {
            compatible: true,
            compatibility_score: 100,
            issues: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        };

        // Check hardware compatibility
        self.check_hardware_compatibility(update_requirements, &mut result);
        
        // Check software compatibility
        self.check_software_compatibility(update_requirements, &mut result);
        
        // Check system requirements
        self.check_system_requirements(update_requirements, &mut result);
        
        // Check resource availability
        self.check_resource_requirements(update_requirements, &mut result);
        
        // Check dependency compatibility
        self.check_dependency_compatibility(update_requirements, &mut result);
        
        // Calculate final compatibility score
        result.compatibility_score = self.calculate_compatibility_score(&result);
        
        // Determine overall compatibility
        result.compatible = result.issues.iter().all(|issue| !issue.blocking);
        
        if !result.compatible {
            warn!("Compatibility check failed: {} issues found", result.issues.len());
        } else {
            info!("Compatibility check passed with score: {}", result.compatibility_score);
        }
        
        result
    }

    /// Check hardware compatibility
    fn check_hardware_compatibility(&self, requirements: &SystemRequirements, result: &mut CompatibilityResult) {
        // Check CPU architecture compatibility
        if let Some(min_version) = &requirements.min_kernel_version {
            if !self.is_kernel_version_compatible(min_version) {
                result.issues.push(CompatibilityIssue {
                    issue_type: IssueType::HardwareIncompatible,
                    component: "CPU".to_string(),
                    description: format!("CPU architecture not compatible with kernel version {}", min_version),
                    severity: IssueSeverity::Critical,
                    blocking: true,
                    possible_solutions: vec![
                        "Upgrade to compatible CPU architecture".to_string(),
                        "Use older kernel version".to_string(),
                    ],
                });
            }
        }

        // Check CPU features
        for feature in &requirements.required_cpu_features {
            if !self.system_info.cpu_features.contains(feature) {
                result.issues.push(CompatibilityIssue {
                    issue_type: IssueType::HardwareIncompatible,
                    component: "CPU".to_string(),
                    description: format!("Required CPU feature '{}' not available", feature),
                    severity: IssueSeverity::High,
                    blocking: true,
                    possible_solutions: vec![
                        "Upgrade CPU".to_string(),
                        "Use different update package".to_string(),
                    ],
                });
            }
        }

        // Check memory requirements
        if let Some(min_memory) = requirements.min_memory_mb {
            if self.system_info.available_memory_mb < min_memory {
                result.issues.push(CompatibilityIssue {
                    issue_type: IssueType::ResourceInsufficient,
                    component: "Memory".to_string(),
                    description: format!("Insufficient memory: required {}, available {}", 
                                        min_memory, self.system_info.available_memory_mb),
                    severity: IssueSeverity::High,
                    blocking: true,
                    possible_solutions: vec![
                        "Add more RAM".to_string(),
                        "Close unnecessary applications".to_string(),
                        "Free up memory".to_string(),
                    ],
                });
            } else if self.system_info.available_memory_mb < min_memory * 120 / 100 {
                result.warnings.push(CompatibilityWarning {
                    warning_type: WarningType::PerformanceImpact,
                    component: "Memory".to_string(),
                    description: "Memory usage may be high after update".to_string(),
                    impact: "System performance may be degraded".to_string(),
                    mitigation: Some("Consider closing unused applications".to_string()),
                });
            }
        }

        // Check disk space requirements
        if let Some(min_disk_space) = requirements.min_disk_space_mb {
            if self.system_info.free_disk_mb < min_disk_space {
                result.issues.push(CompatibilityIssue {
                    issue_type: IssueType::ResourceInsufficient,
                    component: "Storage".to_string(),
                    description: format!("Insufficient disk space: required {}, available {}", 
                                        min_disk_space, self.system_info.free_disk_mb),
                    severity: IssueSeverity::Critical,
                    blocking: true,
                    possible_solutions: vec![
                        "Free up disk space".to_string(),
                        "Use larger disk".to_string(),
                        "Clean temporary files".to_string(),
                    ],
                });
            }
        }
    }

    /// Check software compatibility
    fn check_software_compatibility(&self, requirements: &SystemRequirements, result: &mut CompatibilityResult) {
        // Check for incompatible packages
        for pkg in &requirements.max_incompatible_packages {
            if self.system_info.installed_packages.iter().any(|p| p.name == *pkg) {
                result.issues.push(CompatibilityIssue {
                    issue_type: IssueType::SoftwareIncompatible,
                    component: "Software".to_string(),
                    description: format!("Incompatible package '{}' is installed", pkg),
                    severity: IssueSeverity::High,
                    blocking: true,
                    possible_solutions: vec![
                        format!("Uninstall package '{}'", pkg),
                        "Remove incompatible package before update".to_string(),
                    ],
                });
            }
        }

        // Check required packages
        for driver_name in &requirements.required_drivers {
            if !self.system_info.active_drivers.iter().any(|d| d.name == *driver_name) {
                result.warnings.push(CompatibilityWarning {
                    warning_type: WarningType::FeatureUnavailable,
                    component: "Driver".to_string(),
                    description: format!("Required driver '{}' not found", driver_name),
                    impact: "Some features may not work after update".to_string(),
                    mitigation: Some(format!("Install driver '{}' before update", driver_name)),
                });
            }
        }

        // Check required services
        for service_name in &requirements.required_services {
            if !self.system_info.running_services.iter().any(|s| s.name == *service_name) {
                result.warnings.push(CompatibilityWarning {
                    warning_type: WarningType::ServiceUnavailable,
                    component: "Service".to_string(),
                    description: format!("Required service '{}' not running", service_name),
                    impact: "Service dependency may cause issues".to_string(),
                    mitigation: Some(format!("Start service '{}' before update", service_name)),
                });
            }
        }
    }

    /// Check system requirements
    fn check_system_requirements(&self, requirements: &SystemRequirements, result: &mut CompatibilityResult) {
        // Check kernel version requirements
        if let Some(min_version) = &requirements.min_kernel_version {
            if !self.is_kernel_version_compatible(min_version) {
                result.issues.push(CompatibilityIssue {
                    issue_type: IssueType::SoftwareIncompatible,
                    component: "Kernel".to_string(),
                    description: format!("Kernel version {} required, current: {}", 
                                        min_version, self.system_info.kernel_version),
                    severity: IssueSeverity::Critical,
                    blocking: true,
                    possible_solutions: vec![
                        "Upgrade kernel first".to_string(),
                        "Use older update package".to_string(),
                    ],
                });
            }
        }
    }

    /// Check resource requirements
    fn check_resource_requirements(&self, requirements: &SystemRequirements, result: &mut CompatibilityResult) {
        // Check if enough resources are available for the update process
        if let Some(min_memory) = requirements.min_memory_mb {
            if self.system_info.total_memory_mb < min_memory {
                result.issues.push(CompatibilityIssue {
                    issue_type: IssueType::ResourceInsufficient,
                    component: "Resources".to_string(),
                    description: "Total system memory insufficient for update process".to_string(),
                    severity: IssueSeverity::High,
                    blocking: true,
                    possible_solutions: vec![
                        "Add more RAM".to_string(),
                        "Close all unnecessary applications".to_string(),
                    ],
                });
            }
        }
    }

    /// Check dependency compatibility
    fn check_dependency_compatibility(&self, requirements: &SystemRequirements, result: &mut CompatibilityResult) {
        // Check if all dependencies are compatible with the update
        // This would involve checking package versions, service states, etc.
        
        // Generate recommendations based on current system state
        if self.system_info.free_disk_mb < 2 * 1024 { // Less than 2GB free
            result.recommendations.push(CompatibilityRecommendation {
                recommendation_type: RecommendationType::BackupRequired,
                component: "Storage".to_string(),
                title: "Low Disk Space".to_string(),
                description: "Consider cleaning up disk space before update".to_string(),
                priority: 8,
            });
        }
    }

    /// Check if kernel version is compatible
    fn is_kernel_version_compatible(&self, required_version: &str) -> bool {
        // Simple version comparison - in real implementation would use proper semver
        self.system_info.kernel_version >= required_version
    }

    /// Calculate overall compatibility score
    fn calculate_compatibility_score(&self, result: &CompatibilityResult) -> u8 {
        let mut score = 100;
        
        // Deduct points for critical issues
        for issue in &result.issues {
            match issue.severity {
                IssueSeverity::Critical => score = score.saturating_sub(30),
                IssueSeverity::High => score = score.saturating_sub(20),
                IssueSeverity::Medium => score = score.saturating_sub(10),
                IssueSeverity::Low => score = score.saturating_sub(5),
            }
        }
        
        // Deduct points for warnings
        for _warning in &result.warnings {
            score = score.saturating_sub(2);
        }
        
        score
    }

    /// Gather current system information
    fn gather_system_info() -> SystemInfo {
        // Mock system information gathering
        SystemInfo {
            kernel_version: "1.0.0".to_string(),
            os_name: "MultiOS".to_string(),
            os_version: "1.0.0".to_string(),
            architecture: "x86_64".to_string(),
            cpu_model: "Mock CPU".to_string(),
            cpu_features: vec!["sse2".to_string(), "sse3".to_string()],
            total_memory_mb: 8192,
            available_memory_mb: 4096,
            total_disk_mb: 100_000,
            free_disk_mb: 50_000,
            installed_packages: Vec::new(),
            running_services: Vec::new(),
            active_drivers: Vec::new(),
        }
    }

    /// Get hardware specifications
    fn get_hardware_specs() -> HardwareCompatibility {
        HardwareCompatibility {
            cpu_architecture: "x86_64".to_string(),
            cpu_features_required: Vec::new(),
            memory_requirements: HardwareMemory {
                min_total_mb: 1024,
                min_available_mb: 512,
                recommended_mb: 2048,
                memory_type_required: None,
            },
            storage_requirements: HardwareStorage {
                min_free_space_mb: 1024,
                recommended_free_space_mb: 4096,
                filesystem_types: vec!["ext4".to_string(), "xfs".to_string()],
                max_partition_count: Some(10),
            },
            network_requirements: HardwareNetwork {
                network_interface_required: false,
                minimum_bandwidth_mbps: None,
                protocol_support: Vec::new(),
            },
            peripheral_requirements: Vec::new(),
        }
    }

    /// Get software specifications
    fn get_software_specs() -> SoftwareCompatibility {
        SoftwareCompatibility {
            os_version_min: "1.0.0".to_string(),
            os_version_max: None,
            required_packages: Vec::new(),
            incompatible_packages: Vec::new(),
            required_services: Vec::new(),
            blocked_services: Vec::new(),
        }
    }

    /// Gather current configuration
    fn gather_current_config() -> CurrentConfiguration {
        CurrentConfiguration {
            kernel_parameters: Vec::new(),
            network_config: NetworkConfiguration {
                interfaces: Vec::new(),
                routing_table: Vec::new(),
                dns_servers: Vec::new(),
            },
            security_settings: SecurityConfiguration {
                firewall_enabled: true,
                selinux_enabled: false,
                apparmor_enabled: false,
                encryption_enabled: true,
                secure_boot_enabled: false,
            },
            storage_config: StorageConfiguration {
                filesystems: Vec::new(),
                lvm_configured: false,
                raid_configured: false,
            },
        }
    }

    /// Validate update package compatibility
    pub fn validate_package_compatibility(&self, package_data: &[u8]) -> KernelResult<CompatibilityResult> {
        info!("Validating package compatibility");
        
        // Extract package requirements from package metadata
        let requirements = self.extract_package_requirements(package_data)?;
        
        // Run compatibility check
        Ok(self.check_update_compatibility(&requirements))
    }

    /// Extract package requirements from package data
    fn extract_package_requirements(&self, _package_data: &[u8]) -> KernelResult<SystemRequirements> {
        // Mock package requirements extraction
        // In real implementation, would parse package metadata
        Ok(SystemRequirements {
            min_kernel_version: Some("1.0.0".to_string()),
            min_memory_mb: Some(2048),
            min_disk_space_mb: Some(1024),
            required_cpu_features: Vec::new(),
            required_drivers: Vec::new(),
            required_services: Vec::new(),
            max_incompatible_packages: Vec::new(),
        })
    }
}

/// Initialize the compatibility checker subsystem
pub fn init() -> KernelResult<()> {
    info!("Compatibility Checker initialized");
    Ok(())
}