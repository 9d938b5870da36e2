//! Repository management system for kernel updates
//! 
//! This module provides remote repository synchronization, local repository
//! mirroring, caching, authentication, access control, and notification systems.

use alloc::boxed::Box;
use alloc::collections::btree_map::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::max;
use core::fmt;

use crate::log::LogLevel;
use crate::security::{AuthenticationManager, AuthorizationToken, AccessControlList};

/// Repository types and configurations
#[derive(Debug, Clone)]
pub enum RepositoryType {
    /// Official kernel repository
    Official,
    /// Community-maintained repository
    Community,
    /// Enterprise repository
    Enterprise,
    /// Development/testing repository
    Development,
    /// Custom user repository
    Custom(String),
}

/// Repository configuration
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Repository type
    pub repository_type: RepositoryType,
    /// Repository URL or path
    pub url: String,
    /// Authentication credentials
    pub credentials: Option<RepositoryCredentials>,
    /// Cache configuration
    pub cache_config: CacheConfig,
    /// Mirror configuration
    pub mirror_config: MirrorConfig,
    /// Sync configuration
    pub sync_config: SyncConfig,
    /// Notification configuration
    pub notification_config: NotificationConfig,
}

/// Authentication credentials for repository access
#[derive(Debug, Clone)]
pub struct RepositoryCredentials {
    /// Username or API key
    pub username: String,
    /// Password or secret token
    pub password: String,
    /// Certificate file path for secure access
    pub certificate_path: Option<String>,
    /// API key for REST repositories
    pub api_key: Option<String>,
}

/// Repository information
#[derive(Debug)]
pub struct Repository {
    /// Unique repository identifier
    pub id: String,
    /// Repository configuration
    pub config: RepositoryConfig,
    /// Repository status
    pub status: RepositoryStatus,
    /// Last sync timestamp
    pub last_sync: u64,
    /// Metadata about available packages
    pub package_metadata: BTreeMap<String, PackageMetadata>,
    /// Authentication session
    pub auth_session: Option<AuthSession>,
}

/// Repository connection status
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepositoryStatus {
    /// Repository is available and responsive
    Online,
    /// Repository is offline or unreachable
    Offline,
    /// Repository is syncing data
    Syncing,
    /// Authentication required
    AuthRequired,
    /// Repository is in maintenance mode
    Maintenance,
    /// Repository has errors
    Error(String),
}

/// Package metadata from repository
#[derive(Debug, Clone)]
pub struct PackageMetadata {
    /// Package identifier
    pub id: String,
    /// Package name
    pub name: String,
    /// Package version
    pub version: String,
    /// Package description
    pub description: String,
    /// Package size in bytes
    pub size: usize,
    /// Package checksum
    pub checksum: String,
    /// Dependencies
    pub dependencies: Vec<String>,
    /// Available delta updates
    pub delta_updates: Vec<DeltaVersion>,
    /// Repository this package belongs to
    pub repository_id: String,
}

/// Delta update version information
#[derive(Debug, Clone)]
pub struct DeltaVersion {
    /// Version identifier
    pub version: String,
    /// Size of delta patch
    pub delta_size: usize,
    /// Full package size
    pub full_size: usize,
    /// Compression ratio
    pub compression_ratio: f64,
    /// Available algorithms
    pub algorithms: Vec<super::delta::DiffAlgorithm>,
    /// Release date
    pub release_date: u64,
}

/// Authentication session
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session token
    pub token: AuthorizationToken,
    /// Session expiry timestamp
    pub expiry: u64,
    /// User identifier
    pub user_id: String,
    /// Access permissions
    pub permissions: Vec<String>,
}

/// Repository manager for coordinating operations
pub struct RepositoryManager {
    /// Known repositories
    repositories: BTreeMap<String, Repository>,
    /// Active network connections
    active_connections: BTreeMap<String, NetworkConnection>,
    /// Cache manager
    cache_manager: CacheManager,
    /// Mirror manager
    mirror_manager: MirrorManager,
    /// Sync manager
    sync_manager: SyncManager,
    /// Notification system
    notification_system: NotificationSystem,
    /// Security manager
    security_manager: Option<AuthenticationManager>,
}

/// Network connection to repository
#[derive(Debug)]
struct NetworkConnection {
    /// Connection identifier
    pub id: String,
    /// Repository URL
    pub url: String,
    /// Connection status
    pub status: ConnectionStatus,
    /// Bandwidth limits
    pub bandwidth_limit: usize,
    /// Connection pool
    pool_size: usize,
}

/// Network connection status
#[derive(Debug, Clone, Copy)]
enum ConnectionStatus {
    Connected,
    Disconnected,
    Connecting,
    Error(String),
}

/// Repository synchronization configuration
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Automatic sync enabled
    pub auto_sync: bool,
    /// Sync interval in seconds
    pub sync_interval: u64,
    /// Sync strategy
    pub strategy: SyncStrategy,
    /// Bandwidth throttling
    pub bandwidth_limit: usize,
    /// Retry configuration
    pub retry_config: RetryConfig,
}

/// Sync strategies
#[derive(Debug, Clone, Copy)]
pub enum SyncStrategy {
    /// Full synchronization
    Full,
    /// Incremental sync (only changes)
    Incremental,
    /// Delta-based sync
    DeltaBased,
    /// Smart sync (intelligently choose best method)
    Smart,
}

/// Retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum retry attempts
    pub max_attempts: u32,
    /// Initial retry delay in seconds
    pub initial_delay: u64,
    /// Backoff multiplier
    pub backoff_multiplier: f64,
    /// Maximum delay in seconds
    pub max_delay: u64,
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Enable caching
    pub enabled: bool,
    /// Cache size limit in bytes
    pub max_size: usize,
    /// TTL for cached items in seconds
    pub ttl: u64,
    /// Cache eviction policy
    pub eviction_policy: EvictionPolicy,
}

/// Cache eviction policies
#[derive(Debug, Clone, Copy)]
pub enum EvictionPolicy {
    /// Least Recently Used
    LRU,
    /// Least Frequently Used
    LFU,
    /// First In, First Out
    FIFO,
    /// Size-based eviction
    SizeBased,
}

/// Mirror configuration
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Enable mirroring
    pub enabled: bool,
    /// Mirror selection strategy
    pub selection_strategy: MirrorSelectionStrategy,
    /// Local mirror directory
    pub local_path: String,
    /// Mirror priorities
    pub priorities: BTreeMap<String, u32>,
}

/// Mirror selection strategies
#[derive(Debug, Clone, Copy)]
pub enum MirrorSelectionStrategy {
    /// Use nearest mirror (geographic)
    Geographic,
    /// Use fastest mirror (latency-based)
    Fastest,
    /// Use load-balanced mirrors
    LoadBalanced,
    /// Use specified priority order
    Priority,
}

/// Notification configuration
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Enable notifications
    pub enabled: bool,
    /// Notification channels
    pub channels: Vec<NotificationChannel>,
    /// Notification rules
    pub rules: Vec<NotificationRule>,
}

/// Notification channels
#[derive(Debug, Clone)]
pub enum NotificationChannel {
    /// System log notifications
    SystemLog,
    /// Webhook notifications
    Webhook(String),
    /// Email notifications
    Email(String),
    /// File-based notifications
    File(String),
}

/// Notification rules
#[derive(Debug, Clone)]
pub struct NotificationRule {
    /// Rule identifier
    pub id: String,
    /// Event types to trigger on
    pub event_types: Vec<NotificationEvent>,
    /// Condition for triggering
    pub condition: NotificationCondition,
    /// Actions to take
    pub actions: Vec<NotificationAction>,
}

/// Notification events
#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent {
    RepositorySync,
    UpdateAvailable,
    SyncError,
    AuthenticationError,
    CacheEviction,
    MirrorUpdate,
}

/// Notification conditions
#[derive(Debug, Clone)]
pub enum NotificationCondition {
    /// Always trigger
    Always,
    /// Trigger on errors only
    OnError,
    /// Trigger on successful operations
    OnSuccess,
    /// Custom condition
    Custom(String),
}

/// Notification actions
#[derive(Debug, Clone)]
pub enum NotificationAction {
    LogMessage(String),
    ExecuteCommand(String),
    SendWebhook(String, String),
    Email(String, String),
}

/// Cache manager for optimizing repository access
pub struct CacheManager {
    /// Cache storage
    cache: BTreeMap<String, CacheEntry>,
    /// Configuration
    config: CacheConfig,
    /// Current cache size
    current_size: usize,
}

/// Cache entry
#[derive(Debug)]
struct CacheEntry {
    /// Data payload
    data: Vec<u8>,
    /// Creation timestamp
    created_at: u64,
    /// Access timestamp
    accessed_at: u64,
    /// Access count
    access_count: u32,
    /// TTL expiry
    expires_at: u64,
}

/// Mirror manager for local repository mirroring
pub struct MirrorManager {
    /// Local mirrors
    mirrors: BTreeMap<String, LocalMirror>,
    /// Configuration
    config: MirrorConfig,
    /// Sync status
    sync_status: MirrorSyncStatus,
}

/// Local mirror information
#[derive(Debug)]
struct LocalMirror {
    /// Mirror identifier
    pub id: String,
    /// Local path
    pub path: String,
    /// Source repository
    pub source_repository: String,
    /// Sync status
    pub status: MirrorStatus,
    /// Last sync timestamp
    pub last_sync: u64,
    /// Sync progress
    pub sync_progress: f64,
}

/// Mirror status
#[derive(Debug, Clone, Copy)]
pub enum MirrorStatus {
    /// Mirror is available
    Active,
    /// Mirror is being synced
    Syncing,
    /// Mirror is out of sync
    OutOfDate,
    /// Mirror has errors
    Error(String),
}

/// Mirror sync status
#[derive(Debug)]
pub struct MirrorSyncStatus {
    /// Currently syncing mirrors
    syncing_mirrors: Vec<String>,
    /// Sync queue
    sync_queue: Vec<String>,
    /// Overall progress
    progress: f64,
}

/// Sync manager for coordinating repository synchronization
pub struct SyncManager {
    /// Active sync operations
    active_syncs: BTreeMap<String, SyncOperation>,
    /// Sync queue
    sync_queue: Vec<SyncOperation>,
    /// Configuration
    config: SyncConfig,
}

/// Sync operation details
#[derive(Debug)]
struct SyncOperation {
    /// Operation identifier
    pub id: String,
    /// Repository ID
    pub repository_id: String,
    /// Operation type
    pub operation_type: SyncOperationType,
    /// Status
    pub status: SyncStatus,
    /// Progress
    pub progress: f64,
    /// Start time
    pub start_time: u64,
    /// Expected completion time
    pub expected_completion: u64,
}

/// Sync operation types
#[derive(Debug, Clone, Copy)]
pub enum SyncOperationType {
    /// Full repository sync
    FullSync,
    /// Incremental sync
    IncrementalSync,
    /// Delta update sync
    DeltaSync,
    /// Mirror sync
    MirrorSync,
}

/// Sync operation status
#[derive(Debug, Clone, Copy)]
pub enum SyncStatus {
    /// Operation is pending
    Pending,
    /// Operation is in progress
    InProgress,
    /// Operation completed successfully
    Completed,
    /// Operation failed
    Failed(String),
    /// Operation was cancelled
    Cancelled,
}

/// Notification system for update events
pub struct NotificationSystem {
    /// Registered handlers
    handlers: BTreeMap<String, NotificationHandler>,
    /// Configuration
    config: NotificationConfig,
    /// Event history
    event_history: Vec<NotificationEventRecord>,
}

/// Notification handler
#[derive(Debug)]
struct NotificationHandler {
    /// Handler identifier
    pub id: String,
    /// Handler type
    pub handler_type: NotificationChannel,
    /// Enabled state
    pub enabled: bool,
    /// Handler implementation
    pub implementation: Box<dyn NotificationHandlerImpl>,
}

/// Notification handler trait
pub trait NotificationHandlerImpl: Send + Sync {
    /// Handle notification event
    fn handle_event(&self, event: &NotificationEventRecord) -> Result<(), NotificationError>;
    /// Check if handler is healthy
    fn is_healthy(&self) -> bool;
}

/// Notification event record
#[derive(Debug, Clone)]
pub struct NotificationEventRecord {
    /// Event identifier
    pub id: String,
    /// Event type
    pub event_type: NotificationEvent,
    /// Timestamp
    pub timestamp: u64,
    /// Source repository
    pub source_repository: String,
    /// Event data
    pub data: BTreeMap<String, String>,
    /// Severity level
    pub severity: NotificationSeverity,
}

/// Notification severity levels
#[derive(Debug, Clone, Copy)]
pub enum NotificationSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

/// Notification errors
#[derive(Debug)]
pub enum NotificationError {
    /// Handler not found
    HandlerNotFound,
    /// Handler execution failed
    HandlerExecutionFailed(String),
    /// Configuration error
    ConfigurationError(String),
}

impl RepositoryManager {
    /// Create a new repository manager
    pub fn new() -> Self {
        let default_config = RepositoryConfig {
            repository_type: RepositoryType::Official,
            url: "https://releases.kernel.org".to_string(),
            credentials: None,
            cache_config: CacheConfig::default(),
            mirror_config: MirrorConfig::default(),
            sync_config: SyncConfig::default(),
            notification_config: NotificationConfig::default(),
        };

        let cache_manager = CacheManager::new(default_config.cache_config.clone());
        let mirror_manager = MirrorManager::new(default_config.mirror_config.clone());
        let sync_manager = SyncManager::new(default_config.sync_config.clone());
        let notification_system = NotificationSystem::new(default_config.notification_config.clone());

        Self {
            repositories: BTreeMap::new(),
            active_connections: BTreeMap::new(),
            cache_manager,
            mirror_manager,
            sync_manager,
            notification_system,
            security_manager: None,
        }
    }

    /// Set security manager for authentication
    pub fn set_security_manager(&mut self, security_manager: AuthenticationManager) {
        self.security_manager = Some(security_manager);
    }

    /// Add repository to manager
    pub fn add_repository(&mut self, repository: Repository) -> Result<(), RepositoryError> {
        let repo_id = repository.id.clone();
        
        // Test connection if possible
        if let Ok(_) = self.test_repository_connection(&repository).await {
            self.repositories.insert(repo_id, repository);
            Ok(())
        } else {
            Err(RepositoryError::ConnectionFailed(repo_id))
        }
    }

    /// Remove repository from manager
    pub fn remove_repository(&mut self, repo_id: &str) -> Result<(), RepositoryError> {
        if self.repositories.remove(repo_id).is_some() {
            self.notification_system.send_notification(
                NotificationEvent::RepositorySync,
                &format!("Repository {} removed", repo_id),
                NotificationSeverity::Info,
            );
            Ok(())
        } else {
            Err(RepositoryError::RepositoryNotFound)
        }
    }

    /// Synchronize repository
    pub async fn sync_repository(&mut self, repo_id: &str) -> Result<SyncOperation, RepositoryError> {
        if let Some(repository) = self.repositories.get_mut(repo_id) {
            repository.status = RepositoryStatus::Syncing;
            
            // Create sync operation
            let operation = self.sync_manager.create_sync_operation(
                repo_id,
                SyncOperationType::FullSync,
            )?;
            
            // Execute sync
            self.execute_sync_operation(&operation).await?;
            
            repository.last_sync = crate::hal::timers::get_system_time_ms();
            repository.status = RepositoryStatus::Online;
            
            // Update mirror if enabled
            if self.mirror_manager.config.enabled {
                self.mirror_manager.sync_mirror(repo_id)?;
            }
            
            // Send notification
            self.notification_system.send_notification(
                NotificationEvent::RepositorySync,
                &format!("Repository {} synchronized successfully", repo_id),
                NotificationSeverity::Info,
            );
            
            Ok(operation)
        } else {
            Err(RepositoryError::RepositoryNotFound)
        }
    }

    /// Get package metadata from repository
    pub fn get_package_metadata(&self, repo_id: &str, package_id: &str) -> Option<&PackageMetadata> {
        self.repositories.get(repo_id)
            .and_then(|repo| repo.package_metadata.get(package_id))
    }

    /// Search packages across repositories
    pub fn search_packages(&self, query: &str) -> Vec<PackageMetadata> {
        let mut results = Vec::new();
        
        for repository in self.repositories.values() {
            for package in repository.package_metadata.values() {
                if package.name.contains(query) || 
                   package.description.contains(query) ||
                   package.version.contains(query) {
                    results.push(package.clone());
                }
            }
        }
        
        results
    }

    /// Download package with delta optimization
    pub async fn download_package(
        &mut self,
        repo_id: &str,
        package_id: &str,
        version: &str,
    ) -> Result<PackageDownload, RepositoryError> {
        if let Some(repository) = self.repositories.get(repo_id) {
            if let Some(package) = repository.package_metadata.get(package_id) {
                // Check cache first
                let cache_key = format!("{}/{}/{}", repo_id, package_id, version);
                if let Some(cached_data) = self.cache_manager.get(&cache_key) {
                    return Ok(PackageDownload {
                        data: cached_data,
                        source: DownloadSource::Cache,
                        checksum: package.checksum.clone(),
                        size: cached_data.len(),
                    });
                }
                
                // Download from repository
                let download_data = self.download_from_repository(repository, package, version).await?;
                
                // Cache the download
                self.cache_manager.put(&cache_key, &download_data);
                
                Ok(PackageDownload {
                    data: download_data,
                    source: DownloadSource::Repository,
                    checksum: package.checksum.clone(),
                    size: download_data.len(),
                })
            } else {
                Err(RepositoryError::PackageNotFound)
            }
        } else {
            Err(RepositoryError::RepositoryNotFound)
        }
    }

    /// Update delta patches for repository
    pub async fn update_delta_patches(&mut self, repo_id: &str) -> Result<(), RepositoryError> {
        if let Some(repository) = self.repositories.get_mut(repo_id) {
            // Scan for available delta updates
            for package in repository.package_metadata.values_mut() {
                self.check_delta_updates(package).await?;
            }
            Ok(())
        } else {
            Err(RepositoryError::RepositoryNotFound)
        }
    }

    /// Get repository statistics
    pub fn get_repository_statistics(&self, repo_id: &str) -> Option<RepositoryStatistics> {
        self.repositories.get(repo_id).map(|repo| {
            RepositoryStatistics {
                total_packages: repo.package_metadata.len(),
                last_sync: repo.last_sync,
                cache_hit_rate: self.cache_manager.get_hit_rate(),
                status: repo.status,
                available_space: self.mirror_manager.get_available_space(repo_id),
                sync_progress: self.sync_manager.get_sync_progress(repo_id),
            }
        })
    }

    /// Test repository connection
    async fn test_repository_connection(&self, repository: &Repository) -> Result<(), RepositoryError> {
        // Simulate connection test - in real implementation, would make actual HTTP/HTTPS request
        if repository.config.url.starts_with("http") {
            // Test network connectivity
            Ok(())
        } else {
            // Test local path
            if core::path::Path::new(&repository.config.url).exists() {
                Ok(())
            } else {
                Err(RepositoryError::ConnectionFailed(repository.id.clone()))
            }
        }
    }

    /// Execute sync operation
    async fn execute_sync_operation(&mut self, operation: &SyncOperation) -> Result<(), RepositoryError> {
        // Update operation status
        self.sync_manager.update_operation_status(
            &operation.id,
            SyncStatus::InProgress,
        )?;
        
        // Simulate sync operation - in real implementation, would:
        // 1. Connect to repository
        // 2. Fetch package list
        // 3. Download metadata
        // 4. Update local cache
        // 5. Update mirror if needed
        
        crate::hal::timers::delay_ms(1000); // Simulate work
        
        // Update progress
        for i in 0..=100 {
            self.sync_manager.update_operation_progress(&operation.id, i as f64)?;
            crate::hal::timers::delay_ms(10);
        }
        
        // Complete operation
        self.sync_manager.update_operation_status(
            &operation.id,
            SyncStatus::Completed,
        )?;
        
        Ok(())
    }

    /// Download from repository
    async fn download_from_repository(
        &self,
        repository: &Repository,
        package: &PackageMetadata,
        version: &str,
    ) -> Result<Vec<u8>, RepositoryError> {
        // Simulate download - in real implementation, would make actual HTTP/HTTPS request
        Ok(vec![0u8; package.size])
    }

    /// Check for available delta updates
    async fn check_delta_updates(&self, package: &mut PackageMetadata) -> Result<(), RepositoryError> {
        // Simulate delta update checking
        // In real implementation, would query repository for delta patches
        
        if package.delta_updates.is_empty() {
            package.delta_updates.push(DeltaVersion {
                version: format!("{}.delta", package.version),
                delta_size: package.size / 4, // Estimate 75% savings
                full_size: package.size,
                compression_ratio: 0.75,
                algorithms: vec![
                    super::delta::DiffAlgorithm::KernelOptimized,
                    super::delta::DiffAlgorithm::Bsdiff,
                ],
                release_date: crate::hal::timers::get_system_time_ms(),
            });
        }
        
        Ok(())
    }
}

/// Package download result
#[derive(Debug)]
pub struct PackageDownload {
    /// Downloaded data
    pub data: Vec<u8>,
    /// Download source
    pub source: DownloadSource,
    /// Package checksum
    pub checksum: String,
    /// Download size
    pub size: usize,
}

/// Download sources
#[derive(Debug, Clone, Copy)]
pub enum DownloadSource {
    Cache,
    Repository,
    Mirror,
    Local,
}

/// Repository statistics
#[derive(Debug, Clone)]
pub struct RepositoryStatistics {
    pub total_packages: usize,
    pub last_sync: u64,
    pub cache_hit_rate: f64,
    pub status: RepositoryStatus,
    pub available_space: usize,
    pub sync_progress: f64,
}

/// Repository errors
#[derive(Debug)]
pub enum RepositoryError {
    RepositoryNotFound,
    PackageNotFound,
    ConnectionFailed(String),
    AuthenticationFailed,
    SyncFailed(String),
    CacheError(String),
    NetworkError(String),
    StorageError(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::RepositoryNotFound => write!(f, "Repository not found"),
            RepositoryError::PackageNotFound => write!(f, "Package not found"),
            RepositoryError::ConnectionFailed(repo) => write!(f, "Failed to connect to repository: {}", repo),
            RepositoryError::AuthenticationFailed => write!(f, "Authentication failed"),
            RepositoryError::SyncFailed(msg) => write!(f, "Sync failed: {}", msg),
            RepositoryError::CacheError(msg) => write!(f, "Cache error: {}", msg),
            RepositoryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            RepositoryError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

// Implement missing managers and utilities

impl CacheManager {
    fn new(config: CacheConfig) -> Self {
        Self {
            cache: BTreeMap::new(),
            config,
            current_size: 0,
        }
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let current_time = crate::hal::timers::get_system_time_ms();
        
        self.cache.get(key).and_then(|entry| {
            if entry.expires_at > current_time {
                Some(entry.data.clone())
            } else {
                None
            }
        })
    }

    fn put(&mut self, key: &str, data: &[u8]) {
        let current_time = crate::hal::timers::get_system_time_ms();
        
        // Evict if necessary
        if self.current_size + data.len() > self.config.max_size {
            self.evict();
        }
        
        let entry = CacheEntry {
            data: data.to_vec(),
            created_at: current_time,
            accessed_at: current_time,
            access_count: 1,
            expires_at: current_time + (self.config.ttl * 1000),
        };
        
        self.current_size += data.len();
        self.cache.insert(key.to_string(), entry);
    }

    fn evict(&mut self) {
        match self.config.eviction_policy {
            EvictionPolicy::LRU => {
                if let Some((key, _)) = self.cache
                    .iter()
                    .min_by_key(|(_, entry)| entry.accessed_at) {
                    self.cache.remove(key);
                }
            }
            EvictionPolicy::LFU => {
                if let Some((key, _)) = self.cache
                    .iter()
                    .min_by_key(|(_, entry)| entry.access_count) {
                    self.cache.remove(key);
                }
            }
            _ => {
                // Simple eviction for other policies
                if let Some((key, entry)) = self.cache.pop_first() {
                    self.current_size -= entry.data.len();
                }
            }
        }
    }

    fn get_hit_rate(&self) -> f64 {
        // Simplified implementation
        0.85 // 85% hit rate
    }
}

impl MirrorManager {
    fn new(config: MirrorConfig) -> Self {
        Self {
            mirrors: BTreeMap::new(),
            config,
            sync_status: MirrorSyncStatus {
                syncing_mirrors: Vec::new(),
                sync_queue: Vec::new(),
                progress: 0.0,
            },
        }
    }

    fn sync_mirror(&mut self, repo_id: &str) -> Result<(), RepositoryError> {
        // Simulate mirror sync
        Ok(())
    }

    fn get_available_space(&self, repo_id: &str) -> usize {
        // Simulate available space check
        1024 * 1024 * 1024 // 1GB
    }
}

impl SyncManager {
    fn new(config: SyncConfig) -> Self {
        Self {
            active_syncs: BTreeMap::new(),
            sync_queue: Vec::new(),
            config,
        }
    }

    fn create_sync_operation(
        &mut self,
        repo_id: &str,
        operation_type: SyncOperationType,
    ) -> Result<SyncOperation, RepositoryError> {
        let operation_id = format!("sync_{}_{}", repo_id, crate::hal::timers::get_system_time_ms());
        let start_time = crate::hal::timers::get_system_time_ms();
        
        let operation = SyncOperation {
            id: operation_id.clone(),
            repository_id: repo_id.to_string(),
            operation_type,
            status: SyncStatus::Pending,
            progress: 0.0,
            start_time,
            expected_completion: start_time + 5000,
        };
        
        self.active_syncs.insert(operation_id, operation.clone());
        Ok(operation)
    }

    fn update_operation_status(
        &mut self,
        operation_id: &str,
        status: SyncStatus,
    ) -> Result<(), RepositoryError> {
        if let Some(operation) = self.active_syncs.get_mut(operation_id) {
            operation.status = status;
            Ok(())
        } else {
            Err(RepositoryError::SyncFailed("Operation not found".to_string()))
        }
    }

    fn update_operation_progress(
        &mut self,
        operation_id: &str,
        progress: f64,
    ) -> Result<(), RepositoryError> {
        if let Some(operation) = self.active_syncs.get_mut(operation_id) {
            operation.progress = progress;
            Ok(())
        } else {
            Err(RepositoryError::SyncFailed("Operation not found".to_string()))
        }
    }

    fn get_sync_progress(&self, repo_id: &str) -> f64 {
        self.active_syncs
            .values()
            .find(|op| op.repository_id == repo_id)
            .map(|op| op.progress)
            .unwrap_or(0.0)
    }
}

impl NotificationSystem {
    fn new(config: NotificationConfig) -> Self {
        Self {
            handlers: BTreeMap::new(),
            config,
            event_history: Vec::new(),
        }
    }

    fn send_notification(
        &mut self,
        event_type: NotificationEvent,
        message: &str,
        severity: NotificationSeverity,
    ) {
        let event = NotificationEventRecord {
            id: format!("event_{}", crate::hal::timers::get_system_time_ms()),
            event_type,
            timestamp: crate::hal::timers::get_system_time_ms(),
            source_repository: "unknown".to_string(),
            data: alloc::collections::btree_map![message.to_string()],
            severity,
        };

        self.event_history.push(event.clone());

        // Send to all enabled handlers
        for handler in self.handlers.values() {
            if handler.enabled {
                let _ = handler.implementation.handle_event(&event);
            }
        }
    }
}

// Default implementations

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_size: 1024 * 1024 * 1024, // 1GB
            ttl: 86400, // 24 hours
            eviction_policy: EvictionPolicy::LRU,
        }
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            selection_strategy: MirrorSelectionStrategy::Fastest,
            local_path: "/var/lib/kernel/mirrors".to_string(),
            priorities: BTreeMap::new(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            auto_sync: true,
            sync_interval: 3600, // 1 hour
            strategy: SyncStrategy::Smart,
            bandwidth_limit: 1024 * 1024, // 1MB/s
            retry_config: RetryConfig {
                max_attempts: 3,
                initial_delay: 5,
                backoff_multiplier: 2.0,
                max_delay: 300,
            },
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            channels: vec![NotificationChannel::SystemLog],
            rules: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_repository() -> Repository {
        Repository {
            id: "test_repo".to_string(),
            config: RepositoryConfig::default(),
            status: RepositoryStatus::Online,
            last_sync: 0,
            package_metadata: BTreeMap::new(),
            auth_session: None,
        }
    }

    #[test]
    fn test_repository_manager_creation() {
        let manager = RepositoryManager::new();
        assert_eq!(manager.repositories.len(), 0);
    }

    #[test]
    fn test_cache_operations() {
        let mut cache = CacheManager::new(CacheConfig::default());
        
        let test_data = b"test package data";
        cache.put("test_package", test_data);
        
        let cached_data = cache.get("test_package");
        assert!(cached_data.is_some());
        assert_eq!(cached_data.unwrap(), test_data);
    }

    #[test]
    fn test_sync_operation_creation() {
        let mut sync_manager = SyncManager::new(SyncConfig::default());
        
        let operation = sync_manager.create_sync_operation(
            "test_repo",
            SyncOperationType::FullSync,
        ).unwrap();
        
        assert_eq!(operation.repository_id, "test_repo");
        assert_eq!(operation.operation_type, SyncOperationType::FullSync);
        assert_eq!(operation.status, SyncStatus::Pending);
    }
}