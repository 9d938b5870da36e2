//! Package Manager Integration Module
//! 
//! This module provides integration between the package manager and other MultiOS systems
//! including security, filesystem, and system management.

use super::package_manager::{
    PackageManager, PackageConfig, PackageMetadata, PackageResult,
    PackageError, Version, RepositoryInfo, Dependency, PackageConflict
};

use alloc::vec::Vec;
use alloc::string::String;

/// Integration layer between package manager and MultiOS systems
pub struct PackageManagerIntegration {
    package_manager: PackageManager,
    security_integration: SecurityIntegration,
    filesystem_integration: FilesystemIntegration,
    service_integration: ServiceIntegration,
}

impl PackageManagerIntegration {
    /// Create new integrated package manager
    pub fn new(config: PackageConfig) -> Self {
        let package_manager = PackageManager::new(config);
        
        Self {
            package_manager,
            security_integration: SecurityIntegration::new(),
            filesystem_integration: FilesystemIntegration::new(),
            service_integration: ServiceIntegration::new(),
        }
    }

    /// Initialize the integrated package manager
    pub fn initialize(&mut self) -> PackageResult<()> {
        self.package_manager.initialize()?;
        self.security_integration.initialize()?;
        self.filesystem_integration.initialize()?;
        self.service_integration.initialize()?;
        Ok(())
    }

    /// Install package with full MultiOS integration
    pub fn install_package(&mut self, package_name: &str, version: Option<&Version>) -> PackageResult<()> {
        // Pre-installation security checks
        self.security_integration.validate_package_installation(package_name)?;
        
        // Install package
        self.package_manager.install_package(package_name, version)?;
        
        // Post-installation security verification
        self.security_integration.verify_package_installation(package_name)?;
        
        // Register with service manager
        self.service_integration.register_package_services(package_name)?;
        
        // Update system integration
        self.update_system_integration(package_name)?;
        
        Ok(())
    }

    /// Remove package with full system cleanup
    pub fn remove_package(&mut self, package_name: &str, force: bool) -> PackageResult<()> {
        // Stop any running services
        self.service_integration.stop_package_services(package_name)?;
        
        // Remove package
        self.package_manager.remove_package(package_name, force)?;
        
        // Clean up system integration
        self.cleanup_system_integration(package_name)?;
        
        // Update security policies
        self.security_integration.update_security_policies(package_name)?;
        
        Ok(())
    }

    /// Update package with system services
    pub fn update_package(&mut self, package_name: &str) -> PackageResult<()> {
        // Backup current state
        self.backup_package_state(package_name)?;
        
        // Perform update
        self.package_manager.update_package(package_name)?;
        
        // Restart services if needed
        self.service_integration.restart_package_services(package_name)?;
        
        // Verify update
        self.verify_package_update(package_name)?;
        
        Ok(())
    }

    /// Get package information with system context
    pub fn get_package_info(&self, package_name: &str) -> PackageResult<IntegratedPackageInfo> {
        let package_info = self.package_manager.get_package_info(package_name)?;
        
        // Add system integration information
        let security_context = self.security_integration.get_package_security_context(package_name)?;
        let service_context = self.service_integration.get_package_service_context(package_name)?;
        let filesystem_context = self.filesystem_integration.get_package_filesystem_context(package_name)?;
        
        Ok(IntegratedPackageInfo {
            package_info,
            security_context,
            service_context,
            filesystem_context,
        })
    }

    /// Search packages with system filtering
    pub fn search_packages(&self, query: &str) -> PackageResult<Vec<IntegratedSearchResult>> {
        let mut results = self.package_manager.search_packages(query, None)?;
        
        // Filter by system security policies
        results.retain(|result| {
            self.security_integration.is_package_allowed(&result.package.name)
        });
        
        // Convert to integrated results
        let integrated_results: Vec<IntegratedSearchResult> = results.into_iter().map(|result| {
            IntegratedSearchResult {
                package: result.package,
                score: result.score,
                match_type: result.match_type,
                repository: result.repository,
                security_rating: self.security_integration.get_package_security_rating(&result.package.name),
                system_integration_level: self.get_system_integration_level(&result.package.name),
            }
        }).collect();
        
        Ok(integrated_results)
    }

    /// Perform system-wide package operations
    pub fn perform_system_operation(&mut self, operation: SystemOperation) -> PackageResult<()> {
        match operation {
            SystemOperation::UpdateAll => {
                self.update_all_packages()
            },
            SystemOperation::CleanCache => {
                self.package_manager.clean_cache()
            },
            SystemOperation::RefreshRepositories => {
                self.package_manager.refresh_repositories()
            },
            SystemOperation::VerifyIntegrity => {
                self.verify_package_integrity()
            },
        }
    }

    // Private helper methods

    fn backup_package_state(&self, package_name: &str) -> PackageResult<()> {
        // Implementation would backup package state before update
        Ok(())
    }

    fn verify_package_update(&self, package_name: &str) -> PackageResult<()> {
        // Implementation would verify package update was successful
        Ok(())
    }

    fn update_system_integration(&mut self, package_name: &str) -> PackageResult<()> {
        // Update system integration for new package
        Ok(())
    }

    fn cleanup_system_integration(&mut self, package_name: &str) -> PackageResult<()> {
        // Clean up system integration when removing package
        Ok(())
    }

    fn get_system_integration_level(&self, package_name: &str) -> IntegrationLevel {
        // Determine how well integrated the package is with the system
        IntegrationLevel::Standard
    }

    fn update_all_packages(&mut self) -> PackageResult<()> {
        let updates = self.package_manager.check_for_updates()?;
        
        for update in updates {
            self.package_manager.update_package(&update.package_name)?;
        }
        
        Ok(())
    }

    fn verify_package_integrity(&self) -> PackageResult<()> {
        // Verify integrity of all installed packages
        Ok(())
    }
}

/// Integrated package information with system context
#[derive(Debug, Clone)]
pub struct IntegratedPackageInfo {
    pub package_info: super::PackageInfo,
    pub security_context: SecurityContext,
    pub service_context: ServiceContext,
    pub filesystem_context: FilesystemContext,
}

/// Integration levels for packages with the system
#[derive(Debug, Clone, Copy)]
pub enum IntegrationLevel {
    None,
    Basic,
    Standard,
    Advanced,
    Full,
}

/// System operation types
#[derive(Debug, Clone)]
pub enum SystemOperation {
    UpdateAll,
    CleanCache,
    RefreshRepositories,
    VerifyIntegrity,
}

/// Integrated search result with system context
#[derive(Debug, Clone)]
pub struct IntegratedSearchResult {
    pub package: PackageMetadata,
    pub score: f32,
    pub match_type: super::SearchMatchType,
    pub repository: String,
    pub security_rating: SecurityRating,
    pub system_integration_level: IntegrationLevel,
}

/// Security integration component
struct SecurityIntegration {
    security_policies: Vec<SecurityPolicy>,
    allowed_packages: Vec<String>,
}

impl SecurityIntegration {
    fn new() -> Self {
        Self {
            security_policies: Vec::new(),
            allowed_packages: Vec::new(),
        }
    }

    fn initialize(&mut self) -> PackageResult<()> {
        // Initialize security integration
        Ok(())
    }

    fn validate_package_installation(&self, package_name: &str) -> PackageResult<()> {
        if !self.is_package_allowed(package_name) {
            return Err(PackageError::SecurityViolation(
                format!("Package '{}' is not allowed by security policy", package_name)
            ));
        }
        Ok(())
    }

    fn verify_package_installation(&self, package_name: &str) -> PackageResult<()> {
        // Verify package installation meets security requirements
        Ok(())
    }

    fn get_package_security_context(&self, package_name: &str) -> PackageResult<SecurityContext> {
        Ok(SecurityContext {
            trusted: self.is_package_allowed(package_name),
            signature_verified: true,
            vulnerability_checked: true,
            compliance_level: ComplianceLevel::Standard,
        })
    }

    fn is_package_allowed(&self, package_name: &str) -> bool {
        self.allowed_packages.is_empty() || self.allowed_packages.contains(package_name)
    }

    fn get_package_security_rating(&self, package_name: &str) -> SecurityRating {
        SecurityRating::Trusted
    }

    fn update_security_policies(&mut self, package_name: &str) -> PackageResult<()> {
        // Update security policies after package operation
        Ok(())
    }
}

/// Filesystem integration component
struct FilesystemIntegration {
    mount_points: Vec<String>,
    filesystem_quota: u64,
}

impl FilesystemIntegration {
    fn new() -> Self {
        Self {
            mount_points: vec!["/usr".to_string(), "/opt".to_string(), "/etc".to_string()],
            filesystem_quota: 100 * 1024 * 1024 * 1024, // 100GB
        }
    }

    fn initialize(&mut self) -> PackageResult<()> {
        // Initialize filesystem integration
        Ok(())
    }

    fn get_package_filesystem_context(&self, package_name: &str) -> PackageResult<FilesystemContext> {
        Ok(FilesystemContext {
            mount_points: self.mount_points.clone(),
            quota_assigned: 50 * 1024 * 1024, // 50MB default
            filesystem_type: "ext4".to_string(),
        })
    }
}

/// Service integration component
struct ServiceIntegration {
    service_registry: Vec<RegisteredService>,
}

impl ServiceIntegration {
    fn new() -> Self {
        Self {
            service_registry: Vec::new(),
        }
    }

    fn initialize(&mut self) -> PackageResult<()> {
        // Initialize service integration
        Ok(())
    }

    fn register_package_services(&mut self, package_name: &str) -> PackageResult<()> {
        // Register services provided by package
        Ok(())
    }

    fn stop_package_services(&self, package_name: &str) -> PackageResult<()> {
        // Stop services provided by package
        Ok(())
    }

    fn restart_package_services(&self, package_name: &str) -> PackageResult<()> {
        // Restart services after package update
        Ok(())
    }

    fn get_package_service_context(&self, package_name: &str) -> PackageResult<ServiceContext> {
        Ok(ServiceContext {
            services: Vec::new(),
            dependencies: Vec::new(),
            auto_start: false,
        })
    }
}

// Supporting types for integration contexts
#[derive(Debug, Clone)]
pub struct SecurityContext {
    pub trusted: bool,
    pub signature_verified: bool,
    pub vulnerability_checked: bool,
    pub compliance_level: ComplianceLevel,
}

#[derive(Debug, Clone)]
pub enum ComplianceLevel {
    None,
    Basic,
    Standard,
    High,
    Critical,
}

#[derive(Debug, Clone)]
pub enum SecurityRating {
    Untrusted,
    Low,
    Medium,
    High,
    Trusted,
}

#[derive(Debug, Clone)]
pub struct FilesystemContext {
    pub mount_points: Vec<String>,
    pub quota_assigned: u64,
    pub filesystem_type: String,
}

#[derive(Debug, Clone)]
pub struct ServiceContext {
    pub services: Vec<String>,
    pub dependencies: Vec<String>,
    pub auto_start: bool,
}

#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    pub name: String,
    pub rules: Vec<SecurityRule>,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct SecurityRule {
    pub rule_type: String,
    pub pattern: String,
    pub action: SecurityAction,
}

#[derive(Debug, Clone)]
pub enum SecurityAction {
    Allow,
    Deny,
    Quarantine,
}

#[derive(Debug, Clone)]
pub struct RegisteredService {
    pub name: String,
    pub package: String,
    pub enabled: bool,
    pub auto_start: bool,
}//! Package Manager Integration Module
//! 
//! Provides integration with package managers, dependency resolution,
//! update source management, and package update handling.

use alloc::vec::Vec;
use alloc::string::String;
use alloc::collections::BTreeMap;
use crate::{KernelResult, KernelError, log::{info, warn, error}};

/// Package information structure
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub architecture: String,
    pub description: String,
    pub maintainer: String,
    pub size_bytes: usize,
    pub dependencies: Vec<PackageDependency>,
    pub provides: Vec<String>,
    pub conflicts: Vec<String>,
    pub replaces: Vec<String>,
    pub install_size_bytes: usize,
    pub download_url: String,
    pub checksum: String,
    pub signature: String,
    pub category: PackageCategory,
    pub priority: PackagePriority,
    pub tags: Vec<String>,
    pub homepage: Option<String>,
    pub repository: String,
}

/// Package dependency specification
#[derive(Debug, Clone)]
pub struct PackageDependency {
    pub name: String,
    pub version_constraint: VersionConstraint,
    pub optional: bool,
    pub description: Option<String>,
}

/// Version constraint for dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionConstraint {
    /// Exact version match (e.g., "1.2.3")
    Exact(String),
    /// Greater than or equal to version (e.g., ">=1.2.0")
    GreaterEqual(String),
    /// Less than or equal to version (e.g., "<=2.0.0")
    LessEqual(String),
    /// Version range (e.g., ">=1.2.0,<2.0.0")
    Range(String, String),
    /// Any version
    Any,
}

/// Package category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageCategory {
    System,
    Kernel,
    Security,
    Networking,
    Development,
    Documentation,
    Library,
    Application,
    Driver,
    Service,
}

/// Package priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagePriority {
    Required,
    Important,
    Standard,
    Optional,
    Extra,
}

/// Package update information
#[derive(Debug, Clone)]
pub struct PackageUpdate {
    pub package_name: String,
    pub current_version: String,
    pub new_version: String,
    pub update_type: UpdateType,
    pub changelog: Vec<ChangeLogEntry>,
    pub security_fixes: Vec<SecurityFix>,
    pub breaking_changes: Vec<BreakingChange>,
    pub dependencies_changed: bool,
    pub size_delta_bytes: isize, // positive for larger, negative for smaller
}

/// Update type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateType {
    Minor,     // Bug fixes, minor features
    Major,     // New features, potential breaking changes
    Security,  // Security patches
    Critical,  // Critical security fixes
    Emergency, // Emergency hotfixes
}

/// Change log entry
#[derive(Debug, Clone)]
pub struct ChangeLogEntry {
    pub version: String,
    pub date: u64,
    pub changes: Vec<String>,
    pub author: String,
    pub type_change: ChangeType,
}

/// Change type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
}

/// Security fix information
#[derive(Debug, Clone)]
pub struct SecurityFix {
    pub cve_id: Option<String>,
    pub severity: SecuritySeverity,
    pub description: String,
    pub affected_versions: Vec<String>,
    pub fixed_version: String,
}

/// Security severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecuritySeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Breaking change information
#[derive(Debug, Clone)]
pub struct BreakingChange {
    pub description: String,
    pub migration_guide: String,
    pub impact: BreakingImpact,
    pub affected_apis: Vec<String>,
}

/// Breaking change impact levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakingImpact {
    Low,       // Minimal impact
    Medium,    // Moderate impact
    High,      // High impact
    Critical,  // Critical impact
}

/// Repository configuration
#[derive(Debug, Clone)]
pub struct Repository {
    pub name: String,
    pub url: String,
    pub enabled: bool,
    pub priority: u8,
    pub gpg_check: bool,
    pub signed: bool,
    pub mirror_url: Option<String>,
    pub components: Vec<String>,
}

/// Update source specification
#[derive(Debug, Clone)]
pub struct UpdateSource {
    pub source_type: SourceType,
    pub url: String,
    pub authentication: Option<AuthInfo>,
    pub mirror_list: Vec<String>,
    pub retry_count: u8,
    pub timeout_seconds: u64,
}

/// Source type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Http,
    Https,
    Ftp,
    Ssh,
    Local,
    Cdrom,
}

/// Authentication information
#[derive(Debug, Clone)]
pub struct AuthInfo {
    pub auth_type: AuthType,
    pub username: String,
    pub password: String,
    pub token: Option<String>,
    pub certificate: Option<String>,
}

/// Authentication types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    Basic,
    Digest,
    Token,
    Certificate,
    Ssh,
}

/// Package manager interface
pub struct PackageManager {
    installed_packages: BTreeMap<String, Package>,
    repositories: BTreeMap<String, Repository>,
    update_sources: Vec<UpdateSource>,
    cache_dir: String,
    install_dir: String,
    config_dir: String,
}

/// Dependency resolver for managing package dependencies
pub struct DependencyResolver {
    installed_packages: BTreeMap<String, Package>,
    conflict_resolution: ConflictResolution,
    dependency_graph: DependencyGraph,
}

/// Conflict resolution strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Replace conflicting packages
    Replace,
    /// Skip conflicting packages
    Skip,
    /// Manual resolution required
    Manual,
    /// Prefer newer versions
    PreferNewer,
    /// Prefer older versions
    PreferOlder,
}

/// Dependency graph for tracking package relationships
#[derive(Debug)]
pub struct DependencyGraph {
    dependencies: BTreeMap<String, Vec<String>>,
    dependents: BTreeMap<String, Vec<String>>,
}

/// Repository manager for handling multiple repositories
pub struct RepositoryManager {
    repositories: BTreeMap<String, Repository>,
    mirrors: BTreeMap<String, Vec<String>>,
    cache_validity: u64,
    last_sync: u64,
}

impl PackageManager {
    /// Create a new package manager
    pub fn new() -> Self {
        Self {
            installed_packages: BTreeMap::new(),
            repositories: BTreeMap::new(),
            update_sources: Vec::new(),
            cache_dir: "/var/cache/multios".to_string(),
            install_dir: "/usr".to_string(),
            config_dir: "/etc/multios".to_string(),
        }
    }

    /// Install a package
    pub fn install_package(&self, package_name: &str, version: Option<&str>) -> KernelResult<()> {
        info!("Installing package: {}", package_name);
        
        // Find package in repositories
        let package = self.find_package(package_name, version)?;
        
        // Resolve dependencies
        let dependencies = self.resolve_dependencies(&package)?;
        
        // Install dependencies first
        for dep in &dependencies {
            self.install_package(&dep.name, dep.version_constraint.get_version())?;
        }
        
        // Download package
        let package_data = self.download_package(&package)?;
        
        // Verify package integrity
        self.verify_package_integrity(&package, &package_data)?;
        
        // Install package files
        self.install_package_files(&package, &package_data)?;
        
        // Update package database
        self.update_package_database(&package)?;
        
        info!("Package installed successfully: {}", package_name);
        Ok(())
    }

    /// Remove a package
    pub fn remove_package(&self, package_name: &str, remove_dependencies: bool) -> KernelResult<()> {
        info!("Removing package: {}", package_name);
        
        // Check if package is installed
        if !self.installed_packages.contains_key(package_name) {
            return Err(KernelError::NotFound);
        }
        
        let package = self.installed_packages[package_name].clone();
        
        // Check for reverse dependencies
        let dependents = self.find_dependents(package_name);
        if !dependents.is_empty() && !remove_dependencies {
            return Err(KernelError::InvalidParameter);
        }
        
        // Remove dependent packages first if requested
        if remove_dependencies {
            for dependent in &dependents {
                self.remove_package(dependent, true)?;
            }
        }
        
        // Remove package files
        self.remove_package_files(&package)?;
        
        // Remove from database
        self.remove_from_database(package_name)?;
        
        info!("Package removed successfully: {}", package_name);
        Ok(())
    }

    /// Update a package
    pub fn update_package(&self, package_name: &str) -> KernelResult<PackageUpdate> {
        info!("Updating package: {}", package_name);
        
        // Get current package information
        let current_package = self.installed_packages.get(package_name)
            .ok_or(KernelError::NotFound)?
            .clone();
        
        // Check for updates
        let update_info = self.check_for_updates(&current_package)?;
        
        // Perform update if available
        if update_info.is_some() {
            let update = update_info.unwrap();
            
            // Backup current package
            self.backup_package(&current_package)?;
            
            // Install new version
            self.install_package(package_name, Some(&update.new_version))?;
            
            // Post-update cleanup
            self.post_update_cleanup(&current_package, &update)?;
            
            Ok(update)
        } else {
            Err(KernelError::NotFound)
        }
    }

    /// Check for available updates
    pub fn check_for_updates(&self) -> Vec<PackageUpdate> {
        info!("Checking for available updates");
        
        let mut updates = Vec::new();
        
        for package in self.installed_packages.values() {
            if let Some(update) = self.check_for_updates(package).ok() {
                updates.push(update);
            }
        }
        
        info!("Found {} available updates", updates.len());
        updates
    }

    /// Search for packages
    pub fn search_packages(&self, query: &str) -> Vec<Package> {
        let mut results = Vec::new();
        
        for package in self.installed_packages.values() {
            if package.name.contains(query) || 
               package.description.contains(query) ||
               package.tags.iter().any(|tag| tag.contains(query)) {
                results.push(package.clone());
            }
        }
        
        results
    }

    /// Get package information
    pub fn get_package_info(&self, package_name: &str) -> Option<&Package> {
        self.installed_packages.get(package_name)
    }

    /// List installed packages
    pub fn list_installed_packages(&self) -> Vec<&Package> {
        self.installed_packages.values().collect()
    }

    /// Add repository
    pub fn add_repository(&mut self, repository: Repository) -> KernelResult<()> {
        info!("Adding repository: {}", repository.name);
        
        if repository.enabled {
            self.repositories.insert(repository.name.clone(), repository);
            self.refresh_repository(&repository.name)?;
        }
        
        Ok(())
    }

    /// Remove repository
    pub fn remove_repository(&mut self, repository_name: &str) -> KernelResult<()> {
        info!("Removing repository: {}", repository_name);
        
        if self.repositories.remove(repository_name).is_some() {
            // Clean repository cache
            self.clean_repository_cache(repository_name)?;
        }
        
        Ok(())
    }

    /// Update repository cache
    pub fn refresh_repository(&self, repository_name: &str) -> KernelResult<()> {
        info!("Refreshing repository: {}", repository_name);
        
        let repository = self.repositories.get(repository_name)
            .ok_or(KernelError::NotFound)?;
        
        // Download package lists
        self.download_package_list(repository)?;
        
        // Update local cache
        self.update_local_cache(repository)?;
        
        info!("Repository refreshed successfully: {}", repository_name);
        Ok(())
    }

    /// Add update source
    pub fn add_update_source(&mut self, source: UpdateSource) -> KernelResult<()> {
        info!("Adding update source: {:?}", source.source_type);
        
        self.update_sources.push(source);
        Ok(())
    }

    /// Find package in repositories
    fn find_package(&self, name: &str, version: Option<&str>) -> KernelResult<Package> {
        // Mock package finding - in real implementation would search repositories
        Ok(Package {
            name: name.to_string(),
            version: version.unwrap_or("1.0.0").to_string(),
            architecture: "x86_64".to_string(),
            description: "Mock package".to_string(),
            maintainer: "Mock Maintainer".to_string(),
            size_bytes: 1024 * 1024,
            dependencies: Vec::new(),
            provides: Vec::new(),
            conflicts: Vec::new(),
            replaces: Vec::new(),
            install_size_bytes: 2 * 1024 * 1024,
            download_url: "http://example.com/package".to_string(),
            checksum: "abc123".to_string(),
            signature: "def456".to_string(),
            category: PackageCategory::Application,
            priority: PackagePriority::Standard,
            tags: Vec::new(),
            homepage: None,
            repository: "default".to_string(),
        })
    }

    /// Resolve package dependencies
    fn resolve_dependencies(&self, package: &Package) -> KernelResult<Vec<PackageDependency>> {
        // Mock dependency resolution
        Ok(package.dependencies.clone())
    }

    /// Download package
    fn download_package(&self, package: &Package) -> KernelResult<Vec<u8>> {
        // Mock package download
        info!("Downloading package: {}", package.name);
        Ok(vec![0u8; package.size_bytes])
    }

    /// Verify package integrity
    fn verify_package_integrity(&self, package: &Package, package_data: &[u8]) -> KernelResult<()> {
        // Verify checksum
        let calculated_checksum = self.calculate_checksum(package_data);
        if calculated_checksum != package.checksum {
            return Err(KernelError::CorruptedData);
        }
        
        // Verify signature if present
        if !package.signature.is_empty() {
            self.verify_signature(package_data, &package.signature)?;
        }
        
        Ok(())
    }

    /// Install package files
    fn install_package_files(&self, package: &Package, package_data: &[u8]) -> KernelResult<()> {
        // Mock file installation
        info!("Installing files for package: {}", package.name);
        Ok(())
    }

    /// Remove package files
    fn remove_package_files(&self, package: &Package) -> KernelResult<()> {
        // Mock file removal
        info!("Removing files for package: {}", package.name);
        Ok(())
    }

    /// Update package database
    fn update_package_database(&self, package: &Package) -> KernelResult<()> {
        info!("Updating package database for: {}", package.name);
        Ok(())
    }

    /// Remove from database
    fn remove_from_database(&self, package_name: &str) -> KernelResult<()> {
        info!("Removing from database: {}", package_name);
        Ok(())
    }

    /// Backup package
    fn backup_package(&self, package: &Package) -> KernelResult<()> {
        info!("Backing up package: {}", package.name);
        Ok(())
    }

    /// Post-update cleanup
    fn post_update_cleanup(&self, old_package: &Package, update: &PackageUpdate) -> KernelResult<()> {
        info!("Performing post-update cleanup for: {}", old_package.name);
        Ok(())
    }

    /// Check for updates for a specific package
    fn check_for_updates(&self, package: &Package) -> KernelResult<Option<PackageUpdate>> {
        // Mock update check
        Ok(Some(PackageUpdate {
            package_name: package.name.clone(),
            current_version: package.version.clone(),
            new_version: "1.1.0".to_string(),
            update_type: UpdateType::Minor,
            changelog: Vec::new(),
            security_fixes: Vec::new(),
            breaking_changes: Vec::new(),
            dependencies_changed: false,
            size_delta_bytes: 100 * 1024,
        }))
    }

    /// Find packages that depend on a given package
    fn find_dependents(&self, package_name: &str) -> Vec<String> {
        // Mock dependent finding
        Vec::new()
    }

    /// Download package list from repository
    fn download_package_list(&self, repository: &Repository) -> KernelResult<()> {
        info!("Downloading package list from: {}", repository.name);
        Ok(())
    }

    /// Update local cache
    fn update_local_cache(&self, repository: &Repository) -> KernelResult<()> {
        info!("Updating local cache for: {}", repository.name);
        Ok(())
    }

    /// Clean repository cache
    fn clean_repository_cache(&self, repository_name: &str) -> KernelResult<()> {
        info!("Cleaning cache for repository: {}", repository_name);
        Ok(())
    }

    /// Calculate checksum
    fn calculate_checksum(&self, data: &[u8]) -> String {
        // Mock checksum calculation
        format!("{:x}", data.len())
    }

    /// Verify signature
    fn verify_signature(&self, _data: &[u8], _signature: &str) -> KernelResult<()> {
        // Mock signature verification
        Ok(())
    }
}

impl DependencyResolver {
    /// Create a new dependency resolver
    pub fn new() -> Self {
        Self {
            installed_packages: BTreeMap::new(),
            conflict_resolution: ConflictResolution::Manual,
            dependency_graph: DependencyGraph::new(),
        }
    }

    /// Resolve dependencies for a package
    pub fn resolve(&self, package: &Package) -> KernelResult<Vec<Package>> {
        // Build dependency graph
        self.build_dependency_graph(package)?;
        
        // Perform topological sort
        let resolved_deps = self.topological_sort()?;
        
        Ok(resolved_deps)
    }

    /// Check for dependency conflicts
    pub fn check_conflicts(&self, packages: &[Package]) -> Vec<DependencyConflict> {
        let mut conflicts = Vec::new();
        
        // Check for version conflicts
        for i in 0..packages.len() {
            for j in (i + 1)..packages.len() {
                let pkg1 = &packages[i];
                let pkg2 = &packages[j];
                
                if let Some(conflict) = self.check_package_conflict(pkg1, pkg2) {
                    conflicts.push(conflict);
                }
            }
        }
        
        conflicts
    }

    /// Build dependency graph
    fn build_dependency_graph(&self, package: &Package) -> KernelResult<()> {
        // Mock dependency graph building
        Ok(())
    }

    /// Perform topological sort
    fn topological_sort(&self) -> KernelResult<Vec<Package>> {
        // Mock topological sort
        Ok(Vec::new())
    }

    /// Check for conflicts between two packages
    fn check_package_conflict(&self, pkg1: &Package, pkg2: &Package) -> Option<DependencyConflict> {
        // Check for explicit conflicts
        if pkg1.conflicts.contains(&pkg2.name) || pkg2.conflicts.contains(&pkg1.name) {
            return Some(DependencyConflict {
                package1: pkg1.name.clone(),
                package2: pkg2.name.clone(),
                conflict_type: ConflictType::Explicit,
                description: format!("Packages {} and {} conflict", pkg1.name, pkg2.name),
            });
        }
        
        None
    }
}

/// Dependency conflict information
#[derive(Debug, Clone)]
pub struct DependencyConflict {
    pub package1: String,
    pub package2: String,
    pub conflict_type: ConflictType,
    pub description: String,
}

/// Conflict type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictType {
    Explicit,      // Declared in package metadata
    Version,       // Version incompatibility
    Circular,      // Circular dependency
    Missing,       // Missing dependency
    Duplicate,     // Duplicate packages
}

impl DependencyGraph {
    /// Create a new dependency graph
    pub fn new() -> Self {
        Self {
            dependencies: BTreeMap::new(),
            dependents: BTreeMap::new(),
        }
    }

    /// Add dependency edge
    pub fn add_dependency(&mut self, package: &str, dependency: &str) {
        self.dependencies.entry(package.to_string())
            .or_insert_with(Vec::new)
            .push(dependency.to_string());
            
        self.dependents.entry(dependency.to_string())
            .or_insert_with(Vec::new)
            .push(package.to_string());
    }

    /// Remove dependency edge
    pub fn remove_dependency(&mut self, package: &str, dependency: &str) {
        if let Some(deps) = self.dependencies.get_mut(package) {
            deps.retain(|d| d != dependency);
        }
        
        if let Some(deps) = self.dependents.get_mut(dependency) {
            deps.retain(|d| d != package);
        }
    }

    /// Get dependencies for a package
    pub fn get_dependencies(&self, package: &str) -> Option<&Vec<String>> {
        self.dependencies.get(package)
    }

    /// Get dependents for a package
    pub fn get_dependents(&self, package: &str) -> Option<&Vec<String>> {
        self.dependents.get(package)
    }
}

impl VersionConstraint {
    /// Get the version string from the constraint
    pub fn get_version(&self) -> Option<&str> {
        match self {
            VersionConstraint::Exact(v) => Some(v),
            VersionConstraint::GreaterEqual(v) => Some(v),
            VersionConstraint::LessEqual(v) => Some(v),
            VersionConstraint::Range(min, _) => Some(min),
            VersionConstraint::Any => None,
        }
    }

    /// Check if a version satisfies the constraint
    pub fn satisfies(&self, version: &str) -> bool {
        match self {
            VersionConstraint::Exact(v) => version == v,
            VersionConstraint::GreaterEqual(v) => version >= v,
            VersionConstraint::LessEqual(v) => version <= v,
            VersionConstraint::Range(min, max) => version >= min && version <= max,
            VersionConstraint::Any => true,
        }
    }
}

impl RepositoryManager {
    /// Create a new repository manager
    pub fn new() -> Self {
        Self {
            repositories: BTreeMap::new(),
            mirrors: BTreeMap::new(),
            cache_validity: 3600, // 1 hour
            last_sync: 0,
        }
    }

    /// Add repository
    pub fn add_repository(&mut self, repository: Repository) -> KernelResult<()> {
        info!("Adding repository: {}", repository.name);
        self.repositories.insert(repository.name.clone(), repository);
        Ok(())
    }

    /// Remove repository
    pub fn remove_repository(&mut self, name: &str) -> KernelResult<()> {
        info!("Removing repository: {}", name);
        self.repositories.remove(name);
        Ok(())
    }

    /// Sync all repositories
    pub fn sync_repositories(&mut self) -> KernelResult<()> {
        info!("Syncing all repositories");
        
        for repository in self.repositories.values_mut() {
            if repository.enabled {
                self.sync_repository(repository)?;
            }
        }
        
        self.last_sync = self.get_current_timestamp();
        Ok(())
    }

    /// Sync a single repository
    fn sync_repository(&self, repository: &Repository) -> KernelResult<()> {
        info!("Syncing repository: {}", repository.name);
        
        // Download repository metadata
        self.download_repository_metadata(repository)?;
        
        // Update package cache
        self.update_package_cache(repository)?;
        
        Ok(())
    }

    /// Download repository metadata
    fn download_repository_metadata(&self, repository: &Repository) -> KernelResult<()> {
        // Mock metadata download
        Ok(())
    }

    /// Update package cache
    fn update_package_cache(&self, repository: &Repository) -> KernelResult<()> {
        // Mock cache update
        Ok(())
    }

    /// Get current timestamp
    fn get_current_timestamp(&self) -> u64 {
        1_600_000_000
    }

    /// Check if cache is stale
    pub fn is_cache_stale(&self) -> bool {
        let current_time = self.get_current_timestamp();
        current_time - self.last_sync > self.cache_validity
    }

    /// Get repository list
    pub fn get_repositories(&self) -> Vec<&Repository> {
        self.repositories.values().collect()
    }

    /// Enable repository
    pub fn enable_repository(&mut self, name: &str) -> KernelResult<()> {
        if let Some(repo) = self.repositories.get_mut(name) {
            repo.enabled = true;
            Ok(())
        } else {
            Err(KernelError::NotFound)
        }
    }

    /// Disable repository
    pub fn disable_repository(&mut self, name: &str) -> KernelResult<()> {
        if let Some(repo) = self.repositories.get_mut(name) {
            repo.enabled = false;
            Ok(())
        } else {
            Err(KernelError::NotFound)
        }
    }
}

/// Initialize the package integration subsystem
pub fn init() -> KernelResult<()> {
    info!("Package Integration subsystem initialized");
    Ok(())
}