//! Comprehensive Rollback and Recovery System
//! 
//! This module provides a robust rollback and recovery system for kernel updates,
//! including snapshot-based state management, file-level rollback capabilities,
//! database rollback mechanisms, and automatic failure recovery.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};
use core::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use log::{debug, error, info, warn};
use spin::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::admin::config_manager::ConfigManager;
use crate::admin::backup::BackupManager;
use crate::memory::{Page, PhysicalAddress, VirtualAddress};
use crate::service_manager::{ServiceId, ServiceManager};
use crate::filesystem::{VfsFile, VfsDirectory, VfsNode, VfsNodeId};

// Types and constants
/// Unique identifier for recovery points
pub type RecoveryPointId = u64;

/// Unique identifier for snapshots
pub type SnapshotId = u64;

/// Rollback operation identifier
pub type RollbackOperationId = u64;

/// Maximum number of recovery points to retain
const MAX_RECOVERY_POINTS: usize = 10;

/// Maximum number of snapshots per type
const MAX_SNAPSHOTS_PER_TYPE: usize = 5;

/// Default snapshot retention period (24 hours)
const DEFAULT_SNAPSHOT_RETENTION_HOURS: u64 = 24;

/// Critical component priority levels
const CRITICAL_COMPONENTS: &[&str] = &[
    "kernel_core",
    "memory_manager",
    "scheduler",
    "interrupt_system",
    "filesystem_core",
    "security_subsystem"
];

/// Component categories for rollback targeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ComponentCategory {
    KernelCore = 0,
    SystemServices = 1,
    DeviceDrivers = 2,
    Configuration = 3,
    UserData = 4,
    Database = 5,
    Other = 255,
}

/// Rollback scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RollbackScope {
    FullSystem = 0,        // Complete system rollback
    Component = 1,         // Specific component rollback
    Partial = 2,           // Selected components rollback
    Incremental = 3,       // Incremental changes rollback
}

/// Rollback result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackResult {
    Success,
    PartialSuccess,
    Failed {
        reason: RollbackError,
        partial_rollback: bool,
    },
    Cancelled,
}

/// Rollback error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackError {
    NotFound,
    InvalidState,
    Conflict,
    InsufficientSpace,
    PermissionDenied,
    CorruptedData,
    NetworkError,
    DatabaseError,
    FilesystemError,
    AtomicOperationFailed,
    Timeout,
    RecoveryPointExpired,
    SystemInInvalidState,
}

/// Recovery point status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecoveryPointStatus {
    Active = 0,
    Stale = 1,
    Corrupted = 2,
    Archived = 3,
}

/// Recovery point information
#[derive(Debug)]
pub struct RecoveryPoint {
    pub id: RecoveryPointId,
    pub timestamp: u64,
    pub description: String,
    pub status: RecoveryPointStatus,
    pub component_mask: u64,
    pub snapshot_ids: Vec<SnapshotId>,
    pub metadata: BTreeMap<String, String>,
}

/// System state snapshot
#[derive(Debug)]
pub struct SystemSnapshot {
    pub id: SnapshotId,
    pub timestamp: u64,
    pub component_category: ComponentCategory,
    pub data: SnapshotData,
    pub checksum: u32,
    pub size_bytes: u64,
}

/// Snapshot data variants
#[derive(Debug)]
pub enum SnapshotData {
    KernelState(KernelStateData),
    Filesystem(FilesystemSnapshotData),
    Configuration(ConfigSnapshotData),
    Database(DatabaseSnapshotData),
    ServiceState(ServiceSnapshotData),
    Custom(String, Vec<u8>),
}

/// Kernel state data for snapshot
#[derive(Debug)]
pub struct KernelStateData {
    pub memory_layout: MemoryLayoutSnapshot,
    pub scheduler_state: SchedulerStateSnapshot,
    pub interrupt_state: InterruptStateSnapshot,
    pub loaded_modules: Vec<ModuleInfo>,
}

/// Memory layout snapshot
#[derive(Debug)]
pub struct MemoryLayoutSnapshot {
    pub total_pages: usize,
    pub used_pages: usize,
    pub available_pages: usize,
    pub page_table_structure: Vec<PageTableEntry>,
    pub memory_regions: Vec<MemoryRegion>,
}

/// Memory region information
#[derive(Debug)]
pub struct MemoryRegion {
    pub base: PhysicalAddress,
    pub size: usize,
    pub protection: u32,
    pub region_type: String,
}

/// Page table entry
#[derive(Debug)]
pub struct PageTableEntry {
    pub virtual_address: VirtualAddress,
    pub physical_address: PhysicalAddress,
    pub protection: u32,
    pub present: bool,
}

/// Scheduler state snapshot
#[derive(Debug)]
pub struct SchedulerStateSnapshot {
    pub current_process: Option<ProcessInfo>,
    pub ready_queue: Vec<ProcessInfo>,
    pub blocked_processes: Vec<ProcessInfo>,
    pub priority_levels: u32,
}

/// Process information
#[derive(Debug, Clone)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub priority: u32,
    pub state: String,
}

/// Interrupt state snapshot
#[derive(Debug)]
pub struct InterruptStateSnapshot {
    pub enabled_interrupts: u64,
    pub interrupt_handlers: Vec<InterruptHandler>,
    pub interrupt_counts: BTreeMap<u32, u64>,
}

/// Interrupt handler information
#[derive(Debug, Clone)]
pub struct InterruptHandler {
    pub vector: u32,
    pub handler_function: String,
    pub priority: u32,
}

/// Module information
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    pub name: String,
    pub base_address: PhysicalAddress,
    pub size: usize,
    pub dependencies: Vec<String>,
    pub version: String,
}

/// Filesystem snapshot data
#[derive(Debug)]
pub struct FilesystemSnapshotData {
    pub root_inode: VfsNodeId,
    pub filesystem_type: String,
    pub mount_points: Vec<MountPointInfo>,
    pub file_data: BTreeMap<VfsNodeId, FileSnapshotData>,
}

/// Mount point information
#[derive(Debug, Clone)]
pub struct MountPointInfo {
    pub path: String,
    pub device: String,
    pub filesystem_type: String,
    pub mount_flags: u32,
}

/// File snapshot data
#[derive(Debug)]
pub struct FileSnapshotData {
    pub inode: VfsNodeId,
    pub name: String,
    pub content_hash: u32,
    pub metadata: FileMetadata,
}

/// File metadata
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size: u64,
    pub permissions: u32,
    pub modified_time: u64,
    pub file_type: String,
}

/// Configuration snapshot data
#[derive(Debug)]
pub struct ConfigSnapshotData {
    pub config_sections: BTreeMap<String, ConfigSection>,
    pub environment_variables: BTreeMap<String, String>,
    pub system_settings: BTreeMap<String, String>,
}

/// Configuration section
#[derive(Debug)]
pub struct ConfigSection {
    pub section_name: String,
    pub entries: BTreeMap<String, ConfigEntry>,
}

/// Configuration entry
#[derive(Debug)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub modified_time: u64,
    pub source: String,
}

/// Database snapshot data
#[derive(Debug)]
pub struct DatabaseSnapshotData {
    pub database_name: String,
    pub tables: BTreeMap<String, TableSnapshot>,
    pub schemas: BTreeMap<String, SchemaSnapshot>,
}

/// Table snapshot
#[derive(Debug)]
pub struct TableSnapshot {
    pub table_name: String,
    pub record_count: u64,
    pub schema_hash: u32,
    pub data_hash: u32,
}

/// Schema snapshot
#[derive(Debug)]
pub struct SchemaSnapshot {
    pub schema_name: String,
    pub table_schemas: BTreeMap<String, String>,
}

/// Service snapshot data
#[derive(Debug)]
pub struct ServiceSnapshotData {
    pub services: Vec<ServiceStateSnapshot>,
    pub service_dependencies: BTreeMap<ServiceId, Vec<ServiceId>>,
}

/// Service state snapshot
#[derive(Debug)]
pub struct ServiceStateSnapshot {
    pub service_id: ServiceId,
    pub service_name: String,
    pub status: ServiceStatus,
    pub configuration: BTreeMap<String, String>,
}

/// Service status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ServiceStatus {
    Running = 0,
    Stopped = 1,
    Failed = 2,
    Unknown = 255,
}

/// Automatic rollback trigger types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RollbackTrigger {
    UpdateFailure = 0,
    CriticalError = 1,
    ServiceFailure = 2,
    MemoryCorruption = 3,
    DatabaseCorruption = 4,
    TimeoutExceeded = 5,
    Manual = 6,
}

/// Automatic rollback configuration
#[derive(Debug)]
pub struct AutoRollbackConfig {
    pub enable_automated_rollback: bool,
    pub trigger_types: Vec<RollbackTrigger>,
    pub max_rollback_time_seconds: u64,
    pub enable_partial_rollback: bool,
    pub priority_components: Vec<String>,
}

/// Rollback operation progress tracking
#[derive(Debug)]
pub struct RollbackProgress {
    pub operation_id: RollbackOperationId,
    pub current_phase: RollbackPhase,
    pub progress_percentage: u8,
    pub components_processed: usize,
    pub total_components: usize,
    pub estimated_time_remaining: Option<u64>,
    pub error_messages: Vec<String>,
}

/// Rollback operation phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RollbackPhase {
    Initializing = 0,
    CreatingRecoveryPoint = 1,
    SnapshotValidation = 2,
    ComponentRollback = 3,
    ServiceRestoration = 4,
    Finalization = 5,
    Completed = 6,
}

/// Recovery point manager - manages creation, retention, and cleanup of recovery points
pub struct RecoveryPointManager {
    recovery_points: Arc<Mutex<BTreeMap<RecoveryPointId, RecoveryPoint>>>,
    max_recovery_points: usize,
    snapshot_manager: Arc<SnapshotManager>,
    storage_backend: Arc<dyn StorageBackend>,
}

/// Snapshot manager - handles creating and managing system state snapshots
pub struct SnapshotManager {
    snapshots: Arc<RwLock<BTreeMap<SnapshotId, SystemSnapshot>>>,
    snapshot_storage: Arc<dyn SnapshotStorage>,
    auto_cleanup_enabled: Arc<AtomicBool>,
}

/// Rollback engine - performs actual rollback operations
pub struct RollbackEngine {
    rollback_queue: Arc<Mutex<Vec<RollbackOperation>>>,
    progress_tracker: Arc<Mutex<BTreeMap<RollbackOperationId, RollbackProgress>>>,
    auto_rollback_config: Arc<AutoRollbackConfig>,
    recovery_point_manager: Arc<RecoveryPointManager>,
    snapshot_manager: Arc<SnapshotManager>,
    state_validator: Arc<StateValidator>,
}

/// Rollback operation
#[derive(Debug)]
pub struct RollbackOperation {
    pub id: RollbackOperationId,
    pub operation_type: RollbackScope,
    pub target_recovery_point: Option<RecoveryPointId>,
    pub target_components: Vec<ComponentCategory>,
    pub timestamp: u64,
    pub priority: u8,
}

/// State validator - validates system state integrity during rollback
pub struct StateValidator {
    validation_rules: Vec<ValidationRule>,
    critical_checks: Vec<CriticalCheck>,
}

/// Validation rule
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub rule_name: String,
    pub component_category: ComponentCategory,
    pub validation_function: ValidationFunction,
}

/// Validation function type
type ValidationFunction = fn(&SystemSnapshot) -> Result<(), ValidationError>;

/// Validation error
#[derive(Debug)]
pub struct ValidationError {
    pub rule_name: String,
    pub error_message: String,
    pub severity: ValidationSeverity,
}

/// Validation severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ValidationSeverity {
    Warning = 0,
    Error = 1,
    Critical = 2,
}

/// Critical system checks
#[derive(Debug, Clone)]
pub struct CriticalCheck {
    pub check_name: String,
    pub check_function: CriticalCheckFunction,
}

/// Critical check function type
type CriticalCheckFunction = fn() -> Result<(), CriticalCheckError>;

/// Critical check error
#[derive(Debug)]
pub struct CriticalCheckError {
    pub check_name: String,
    pub error_message: String,
    pub requires_rollback: bool,
}

/// Storage backend for recovery points and snapshots
pub trait StorageBackend: Send + Sync {
    fn store_recovery_point(&self, recovery_point: &RecoveryPoint) -> Result<(), RollbackError>;
    fn load_recovery_point(&self, id: RecoveryPointId) -> Result<RecoveryPoint, RollbackError>;
    fn delete_recovery_point(&self, id: RecoveryPointId) -> Result<(), RollbackError>;
    fn list_recovery_points(&self) -> Result<Vec<RecoveryPointId>, RollbackError>;
    fn get_storage_usage(&self) -> Result<StorageUsageInfo, RollbackError>;
}

/// Snapshot storage backend
pub trait SnapshotStorage: Send + Sync {
    fn store_snapshot(&self, snapshot: &SystemSnapshot) -> Result<(), RollbackError>;
    fn load_snapshot(&self, id: SnapshotId) -> Result<SystemSnapshot, RollbackError>;
    fn delete_snapshot(&self, id: SnapshotId) -> Result<(), RollbackError>;
    fn list_snapshots(&self) -> Result<Vec<SnapshotId>, RollbackError>;
    fn cleanup_expired_snapshots(&self) -> Result<u32, RollbackError>;
}

/// Storage usage information
#[derive(Debug)]
pub struct StorageUsageInfo {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub recovery_points_count: u32,
    pub snapshots_count: u32,
}

impl Display for RollbackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RollbackError::NotFound => write!(f, "Resource not found"),
            RollbackError::InvalidState => write!(f, "Invalid system state"),
            RollbackError::Conflict => write!(f, "Operation conflict detected"),
            RollbackError::InsufficientSpace => write!(f, "Insufficient storage space"),
            RollbackError::PermissionDenied => write!(f, "Permission denied"),
            RollbackError::CorruptedData => write!(f, "Data corruption detected"),
            RollbackError::NetworkError => write!(f, "Network operation failed"),
            RollbackError::DatabaseError => write!(f, "Database operation failed"),
            RollbackError::FilesystemError => write!(f, "Filesystem operation failed"),
            RollbackError::AtomicOperationFailed => write!(f, "Atomic operation failed"),
            RollbackError::Timeout => write!(f, "Operation timeout"),
            RollbackError::RecoveryPointExpired => write!(f, "Recovery point has expired"),
            RollbackError::SystemInInvalidState => write!(f, "System is in invalid state"),
        }
    }
}

impl Display for ComponentCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ComponentCategory::KernelCore => write!(f, "Kernel Core"),
            ComponentCategory::SystemServices => write!(f, "System Services"),
            ComponentCategory::DeviceDrivers => write!(f, "Device Drivers"),
            ComponentCategory::Configuration => write!(f, "Configuration"),
            ComponentCategory::UserData => write!(f, "User Data"),
            ComponentCategory::Database => write!(f, "Database"),
            ComponentCategory::Other => write!(f, "Other"),
        }
    }
}

// Implementation of main rollback system components

impl RecoveryPointManager {
    /// Create a new recovery point manager
    pub fn new(
        max_recovery_points: usize,
        snapshot_manager: Arc<SnapshotManager>,
        storage_backend: Arc<dyn StorageBackend>,
    ) -> Arc<Self> {
        Arc::new(Self {
            recovery_points: Arc::new(Mutex::new(BTreeMap::new())),
            max_recovery_points,
            snapshot_manager,
            storage_backend,
        })
    }

    /// Create a new recovery point with current system state
    pub fn create_recovery_point(
        &self,
        description: &str,
        component_mask: u64,
    ) -> Result<RecoveryPointId, RollbackError> {
        let id = self.generate_recovery_point_id();
        let timestamp = crate::hal::timers::get_system_time_ms();

        info!("Creating recovery point {}: {}", id, description);

        // Create snapshots for required components
        let mut snapshot_ids = Vec::new();
        
        // Determine which components to snapshot based on mask
        let components_to_snapshot = self.get_components_from_mask(component_mask);
        
        for component_category in components_to_snapshot {
            let snapshot = self.snapshot_manager.create_snapshot(component_category)?;
            snapshot_ids.push(snapshot.id);
        }

        // Create recovery point
        let recovery_point = RecoveryPoint {
            id,
            timestamp,
            description: description.to_string(),
            status: RecoveryPointStatus::Active,
            component_mask,
            snapshot_ids,
            metadata: BTreeMap::new(),
        };

        // Store recovery point
        {
            let mut points = self.recovery_points.lock();
            points.insert(id, recovery_point.clone());
        }

        // Persist to storage
        self.storage_backend.store_recovery_point(&recovery_point)?;

        // Cleanup old recovery points if over limit
        self.cleanup_old_recovery_points()?;

        info!("Recovery point {} created successfully", id);
        Ok(id)
    }

    /// Get a recovery point by ID
    pub fn get_recovery_point(&self, id: RecoveryPointId) -> Option<RecoveryPoint> {
        let points = self.recovery_points.lock();
        points.get(&id).cloned()
    }

    /// List all recovery points
    pub fn list_recovery_points(&self) -> Vec<RecoveryPoint> {
        let points = self.recovery_points.lock();
        points.values().cloned().collect()
    }

    /// Delete a recovery point
    pub fn delete_recovery_point(&self, id: RecoveryPointId) -> Result<(), RollbackError> {
        info!("Deleting recovery point {}", id);

        // Remove from memory
        {
            let mut points = self.recovery_points.lock();
            if let Some(recovery_point) = points.remove(&id) {
                // Delete associated snapshots
                for snapshot_id in &recovery_point.snapshot_ids {
                    let _ = self.snapshot_manager.delete_snapshot(*snapshot_id);
                }
            }
        }

        // Remove from storage
        self.storage_backend.delete_recovery_point(id)?;

        Ok(())
    }

    /// Create recovery point before update operation
    pub fn create_update_recovery_point(&self, update_info: &str) -> Result<RecoveryPointId, RollbackError> {
        let mask = self.get_update_component_mask();
        self.create_recovery_point(&format!("Pre-update: {}", update_info), mask)
    }

    /// Get the most recent recovery point
    pub fn get_latest_recovery_point(&self) -> Option<RecoveryPoint> {
        let points = self.recovery_points.lock();
        points.values().max_by_key(|rp| rp.timestamp).cloned()
    }

    /// Mark recovery point as stale
    pub fn mark_recovery_point_stale(&self, id: RecoveryPointId) -> Result<(), RollbackError> {
        let mut points = self.recovery_points.lock();
        if let Some(rp) = points.get_mut(&id) {
            rp.status = RecoveryPointStatus::Stale;
            Ok(())
        } else {
            Err(RollbackError::NotFound)
        }
    }

    fn generate_recovery_point_id(&self) -> RecoveryPointId {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let current_time = crate::hal::timers::get_system_time_ms();
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        (current_time << 16) | counter
    }

    fn get_components_from_mask(&self, mask: u64) -> Vec<ComponentCategory> {
        let mut components = Vec::new();
        
        if mask & 0x1 != 0 {
            components.push(ComponentCategory::KernelCore);
        }
        if mask & 0x2 != 0 {
            components.push(ComponentCategory::SystemServices);
        }
        if mask & 0x4 != 0 {
            components.push(ComponentCategory::DeviceDrivers);
        }
        if mask & 0x8 != 0 {
            components.push(ComponentCategory::Configuration);
        }
        if mask & 0x10 != 0 {
            components.push(ComponentCategory::UserData);
        }
        if mask & 0x20 != 0 {
            components.push(ComponentCategory::Database);
        }
        
        components
    }

    fn get_update_component_mask(&self) -> u64 {
        // Default mask for update operations - includes all critical components
        0x3F // All components
    }

    fn cleanup_old_recovery_points(&self) -> Result<(), RollbackError> {
        let mut points = self.recovery_points.lock();
        while points.len() > self.max_recovery_points {
            if let Some((oldest_id, _)) = points
                .iter()
                .min_by_key(|(_, rp)| rp.timestamp)
            {
                let oldest_id = *oldest_id;
                let recovery_point = points.remove(&oldest_id).unwrap();
                
                // Delete associated snapshots
                for snapshot_id in &recovery_point.snapshot_ids {
                    let _ = self.snapshot_manager.delete_snapshot(*snapshot_id);
                }
                
                // Delete from storage
                let _ = self.storage_backend.delete_recovery_point(oldest_id);
            }
        }
        Ok(())
    }
}

impl SnapshotManager {
    /// Create a new snapshot manager
    pub fn new(snapshot_storage: Arc<dyn SnapshotStorage>) -> Arc<Self> {
        Arc::new(Self {
            snapshots: Arc::new(RwLock::new(BTreeMap::new())),
            snapshot_storage,
            auto_cleanup_enabled: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Create a snapshot of the specified component category
    pub fn create_snapshot(&self, category: ComponentCategory) -> Result<SystemSnapshot, RollbackError> {
        info!("Creating snapshot for category: {:?}", category);
        
        let id = self.generate_snapshot_id();
        let timestamp = crate::hal::timers::get_system_time_ms();
        let data = match category {
            ComponentCategory::KernelCore => self.create_kernel_state_snapshot()?,
            ComponentCategory::SystemServices => self.create_service_state_snapshot()?,
            ComponentCategory::DeviceDrivers => self.create_device_state_snapshot()?,
            ComponentCategory::Configuration => self.create_config_snapshot()?,
            ComponentCategory::UserData => self.create_filesystem_snapshot()?,
            ComponentCategory::Database => self.create_database_snapshot()?,
            ComponentCategory::Other => return Err(RollbackError::InvalidState),
        };

        let checksum = self.calculate_checksum(&data);
        let size_bytes = self.calculate_size_bytes(&data);

        let snapshot = SystemSnapshot {
            id,
            timestamp,
            component_category: category,
            data,
            checksum,
            size_bytes,
        };

        // Store snapshot
        {
            let mut snapshots = self.snapshots.write();
            snapshots.insert(id, snapshot.clone());
        }

        // Persist to storage
        self.snapshot_storage.store_snapshot(&snapshot)?;

        // Cleanup old snapshots if auto-cleanup is enabled
        if self.auto_cleanup_enabled.load(Ordering::SeqCst) {
            self.cleanup_old_snapshots(category)?;
        }

        info!("Snapshot {} created successfully for category: {:?}", id, category);
        Ok(snapshot)
    }

    /// Delete a snapshot
    pub fn delete_snapshot(&self, id: SnapshotId) -> Result<(), RollbackError> {
        // Remove from memory
        {
            let mut snapshots = self.snapshots.write();
            snapshots.remove(&id);
        }

        // Remove from storage
        self.snapshot_storage.delete_snapshot(id)?;

        Ok(())
    }

    /// Get a snapshot by ID
    pub fn get_snapshot(&self, id: SnapshotId) -> Option<SystemSnapshot> {
        let snapshots = self.snapshots.read();
        snapshots.get(&id).cloned()
    }

    /// List snapshots by category
    pub fn list_snapshots_by_category(&self, category: ComponentCategory) -> Vec<SystemSnapshot> {
        let snapshots = self.snapshots.read();
        snapshots.values()
            .filter(|s| s.component_category == category)
            .cloned()
            .collect()
    }

    /// Validate snapshot integrity
    pub fn validate_snapshot(&self, id: SnapshotId) -> Result<bool, RollbackError> {
        if let Some(snapshot) = self.get_snapshot(id) {
            let calculated_checksum = self.calculate_checksum(&snapshot.data);
            Ok(calculated_checksum == snapshot.checksum)
        } else {
            Err(RollbackError::NotFound)
        }
    }

    fn generate_snapshot_id(&self) -> SnapshotId {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let current_time = crate::hal::timers::get_system_time_ms();
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        (current_time << 16) | counter
    }

    fn calculate_checksum(&self, data: &SnapshotData) -> u32 {
        // Simple CRC32 calculation
        let data_bytes = self.serialize_data(data);
        self.crc32(&data_bytes)
    }

    fn calculate_size_bytes(&self, data: &SnapshotData) -> u64 {
        let serialized = self.serialize_data(data);
        serialized.len() as u64
    }

    fn crc32(&self, data: &[u8]) -> u32 {
        // Simplified CRC32 - in real implementation would use proper CRC32
        let mut hash: u32 = 0xFFFFFFFF;
        for &byte in data {
            hash ^= byte as u32;
            for _ in 0..8 {
                if hash & 1 != 0 {
                    hash = (hash >> 1) ^ 0xEDB88320;
                } else {
                    hash >>= 1;
                }
            }
        }
        !hash
    }

    fn serialize_data(&self, data: &SnapshotData) -> Vec<u8> {
        match data {
            SnapshotData::KernelState(kernel_data) => {
                // Simplified serialization - would use proper serialization in real implementation
                alloc::format!("kernel_state:{:?}", kernel_data).into_bytes()
            }
            SnapshotData::Filesystem(fs_data) => {
                alloc::format!("filesystem:{:?}", fs_data).into_bytes()
            }
            SnapshotData::Configuration(config_data) => {
                alloc::format!("config:{:?}", config_data).into_bytes()
            }
            SnapshotData::Database(db_data) => {
                alloc::format!("database:{:?}", db_data).into_bytes()
            }
            SnapshotData::ServiceState(service_data) => {
                alloc::format!("service:{:?}", service_data).into_bytes()
            }
            SnapshotData::Custom(custom_type, custom_data) => {
                let mut result = custom_type.as_bytes().to_vec();
                result.extend(custom_data);
                result
            }
        }
    }

    fn create_kernel_state_snapshot(&self) -> Result<SnapshotData, RollbackError> {
        // Capture kernel state information
        let memory_layout = self.capture_memory_layout();
        let scheduler_state = self.capture_scheduler_state();
        let interrupt_state = self.capture_interrupt_state();
        let loaded_modules = self.capture_loaded_modules();

        let kernel_data = KernelStateData {
            memory_layout,
            scheduler_state,
            interrupt_state,
            loaded_modules,
        };

        Ok(SnapshotData::KernelState(kernel_data))
    }

    fn create_service_state_snapshot(&self) -> Result<SnapshotData, RollbackError> {
        let service_manager = crate::service_manager::SERVICE_MANAGER.lock();
        let services = service_manager.get_all_services_snapshot();
        let dependencies = service_manager.get_service_dependencies_snapshot();

        let service_data = ServiceSnapshotData {
            services,
            service_dependencies: dependencies,
        };

        Ok(SnapshotData::ServiceState(service_data))
    }

    fn create_device_state_snapshot(&self) -> Result<SnapshotData, RollbackError> {
        // Capture device driver state
        // This would interface with the driver framework to get current driver state
        warn!("Device state snapshot not fully implemented");
        Ok(SnapshotData::Custom("device_state".to_string(), Vec::new()))
    }

    fn create_config_snapshot(&self) -> Result<SnapshotData, RollbackError> {
        let config_manager = crate::admin::config_manager::CONFIG_MANAGER.lock();
        let config_sections = config_manager.get_all_config_sections();
        let environment_vars = self.get_environment_variables();
        let system_settings = self.get_system_settings();

        let config_data = ConfigSnapshotData {
            config_sections,
            environment_variables: environment_vars,
            system_settings: system_settings,
        };

        Ok(SnapshotData::Configuration(config_data))
    }

    fn create_filesystem_snapshot(&self) -> Result<SnapshotData, RollbackError> {
        // Capture filesystem state
        // This would interface with VFS to get current filesystem state
        warn!("Filesystem snapshot not fully implemented");
        Ok(SnapshotData::Custom("filesystem".to_string(), Vec::new()))
    }

    fn create_database_snapshot(&self) -> Result<SnapshotData, RollbackError> {
        // Capture database state
        warn!("Database snapshot not fully implemented");
        Ok(SnapshotData::Custom("database".to_string(), Vec::new()))
    }

    fn capture_memory_layout(&self) -> MemoryLayoutSnapshot {
        let memory_stats = crate::memory::get_memory_stats();
        
        MemoryLayoutSnapshot {
            total_pages: memory_stats.total_pages,
            used_pages: memory_stats.used_pages,
            available_pages: memory_stats.available_pages,
            page_table_structure: Vec::new(), // Would capture actual page table structure
            memory_regions: Vec::new(), // Would capture actual memory regions
        }
    }

    fn capture_scheduler_state(&self) -> SchedulerStateSnapshot {
        let scheduler = crate::scheduler::SCHEDULER.lock();
        
        SchedulerStateSnapshot {
            current_process: scheduler.get_current_process_info(),
            ready_queue: scheduler.get_ready_processes(),
            blocked_processes: scheduler.get_blocked_processes(),
            priority_levels: scheduler.get_priority_levels(),
        }
    }

    fn capture_interrupt_state(&self) -> InterruptStateSnapshot {
        let interrupt_stats = crate::arch::interrupts::get_interrupt_stats();
        
        InterruptStateSnapshot {
            enabled_interrupts: interrupt_stats.total_interrupts,
            interrupt_handlers: Vec::new(), // Would capture actual interrupt handlers
            interrupt_counts: BTreeMap::new(), // Would capture actual interrupt counts
        }
    }

    fn capture_loaded_modules(&self) -> Vec<ModuleInfo> {
        // Would capture loaded kernel modules
        Vec::new()
    }

    fn get_environment_variables(&self) -> BTreeMap<String, String> {
        // Would capture current environment variables
        BTreeMap::new()
    }

    fn get_system_settings(&self) -> BTreeMap<String, String> {
        // Would capture current system settings
        BTreeMap::new()
    }

    fn cleanup_old_snapshots(&self, category: ComponentCategory) -> Result<(), RollbackError> {
        let mut snapshots = self.snapshots.write();
        let category_snapshots: Vec<SnapshotId> = snapshots
            .values()
            .filter(|s| s.component_category == category)
            .map(|s| s.id)
            .collect();

        // Sort by timestamp (oldest first)
        category_snapshots.sort_by_key(|&id| {
            snapshots.get(&id).map(|s| s.timestamp).unwrap_or(0)
        });

        // Keep only the most recent MAX_SNAPSHOTS_PER_TYPE snapshots
        let to_delete = if category_snapshots.len() > MAX_SNAPSHOTS_PER_TYPE {
            category_snapshots.len() - MAX_SNAPSHOTS_PER_TYPE
        } else {
            0
        };

        for i in 0..to_delete {
            let snapshot_id = category_snapshots[i];
            let snapshot = snapshots.remove(&snapshot_id).unwrap();
            
            // Delete from storage
            let _ = self.snapshot_storage.delete_snapshot(snapshot_id);
        }

        Ok(())
    }
}

impl RollbackEngine {
    /// Create a new rollback engine
    pub fn new(
        recovery_point_manager: Arc<RecoveryPointManager>,
        snapshot_manager: Arc<SnapshotManager>,
        state_validator: Arc<StateValidator>,
        auto_rollback_config: Arc<AutoRollbackConfig>,
    ) -> Arc<Self> {
        Arc::new(Self {
            rollback_queue: Arc::new(Mutex::new(Vec::new())),
            progress_tracker: Arc::new(Mutex::new(BTreeMap::new())),
            auto_rollback_config,
            recovery_point_manager,
            snapshot_manager,
            state_validator,
        })
    }

    /// Execute a rollback operation
    pub fn execute_rollback(
        &self,
        scope: RollbackScope,
        target_recovery_point: Option<RecoveryPointId>,
        target_components: Vec<ComponentCategory>,
    ) -> Result<RollbackOperationId, RollbackError> {
        let operation_id = self.generate_operation_id();
        
        let rollback_operation = RollbackOperation {
            id: operation_id,
            operation_type: scope,
            target_recovery_point,
            target_components,
            timestamp: crate::hal::timers::get_system_time_ms(),
            priority: 1,
        };

        // Initialize progress tracking
        {
            let mut progress_tracker = self.progress_tracker.lock();
            progress_tracker.insert(operation_id, RollbackProgress {
                operation_id,
                current_phase: RollbackPhase::Initializing,
                progress_percentage: 0,
                components_processed: 0,
                total_components: target_components.len(),
                estimated_time_remaining: None,
                error_messages: Vec::new(),
            });
        }

        // Add to rollback queue
        {
            let mut queue = self.rollback_queue.lock();
            queue.push(rollback_operation);
        }

        // Execute rollback asynchronously
        self.execute_rollback_async(operation_id);

        info!("Rollback operation {} initiated", operation_id);
        Ok(operation_id)
    }

    /// Execute automatic rollback based on triggers
    pub fn execute_automated_rollback(&self, trigger: RollbackTrigger) -> Result<(), RollbackError> {
        if !self.auto_rollback_config.enable_automated_rollback {
            return Ok(());
        }

        if !self.auto_rollback_config.trigger_types.contains(&trigger) {
            warn!("Automatic rollback triggered for {:?} but not enabled", trigger);
            return Ok(());
        }

        warn!("Executing automatic rollback due to trigger: {:?}", trigger);

        // Get latest recovery point
        let latest_recovery_point = self.recovery_point_manager.get_latest_recovery_point();
        if let Some(recovery_point) = latest_recovery_point {
            let components = self.get_priority_components();
            self.execute_rollback(RollbackScope::Partial, Some(recovery_point.id), components)
                .map(|_id| ())
        } else {
            Err(RollbackError::NotFound)
        }
    }

    /// Cancel a rollback operation
    pub fn cancel_rollback(&self, operation_id: RollbackOperationId) -> Result<(), RollbackError> {
        let mut queue = self.rollback_queue.lock();
        if let Some(position) = queue.iter().position(|op| op.id == operation_id) {
            queue.remove(position);
        }

        // Remove from progress tracker
        {
            let mut progress_tracker = self.progress_tracker.lock();
            progress_tracker.remove(&operation_id);
        }

        Ok(())
    }

    /// Get rollback operation progress
    pub fn get_rollback_progress(&self, operation_id: RollbackOperationId) -> Option<RollbackProgress> {
        let progress_tracker = self.progress_tracker.lock();
        progress_tracker.get(&operation_id).cloned()
    }

    /// List pending rollback operations
    pub fn list_pending_operations(&self) -> Vec<RollbackOperation> {
        let queue = self.rollback_queue.lock();
        queue.iter().cloned().collect()
    }

    fn execute_rollback_async(&self, operation_id: RollbackOperationId) {
        // Spawn async rollback task
        // In real implementation, this would use proper async runtime
        info!("Starting async rollback operation {}", operation_id);
        
        // For now, execute synchronously in a background task
        // This is a simplified implementation
        match self.perform_rollback_operation(operation_id) {
            Ok(result) => {
                info!("Rollback operation {} completed: {:?}", operation_id, result);
            }
            Err(error) => {
                error!("Rollback operation {} failed: {:?}", operation_id, error);
            }
        }
    }

    fn perform_rollback_operation(&self, operation_id: RollbackOperationId) -> Result<RollbackResult, RollbackError> {
        // Get operation details
        let operation = {
            let queue = self.rollback_queue.lock();
            queue.iter().find(|op| op.id == operation_id)
                .cloned()
                .ok_or(RollbackError::NotFound)?
        };

        // Update progress: Creating recovery point
        self.update_progress(operation_id, RollbackPhase::CreatingRecoveryPoint, 10);

        // Create pre-rollback recovery point if it doesn't exist
        if let Some(target_recovery_point_id) = operation.target_recovery_point {
            // Validate recovery point exists and is valid
            let recovery_point = self.recovery_point_manager.get_recovery_point(target_recovery_point_id)
                .ok_or(RollbackError::NotFound)?;

            if recovery_point.status != RecoveryPointStatus::Active {
                return Err(RollbackError::InvalidState);
            }

            // Update progress: Snapshot validation
            self.update_progress(operation_id, RollbackPhase::SnapshotValidation, 25);

            // Validate all snapshots in the recovery point
            for &snapshot_id in &recovery_point.snapshot_ids {
                if !self.snapshot_manager.validate_snapshot(snapshot_id)? {
                    return Err(RollbackError::CorruptedData);
                }
            }

            // Update progress: Component rollback
            self.update_progress(operation_id, RollbackPhase::ComponentRollback, 50);

            // Perform component rollback
            let mut rollback_success = true;
            let mut partial_success = false;
            let mut error_messages = Vec::new();

            for (index, component_category) in operation.target_components.iter().enumerate() {
                match self.rollback_component(*component_category, &recovery_point) {
                    Ok(()) => {
                        debug!("Successfully rolled back component: {:?}", component_category);
                    }
                    Err(error) => {
                        error!("Failed to rollback component {:?}: {:?}", component_category, error);
                        rollback_success = false;
                        if self.auto_rollback_config.enable_partial_rollback {
                            partial_success = true;
                        }
                        error_messages.push(format!("Component {:?} rollback failed: {}", component_category, error));
                    }
                }

                // Update progress
                let progress = 50 + (index as u8 * 40 / operation.target_components.len() as u8);
                self.update_progress(operation_id, RollbackPhase::ComponentRollback, progress);
            }

            // Update progress: Service restoration
            self.update_progress(operation_id, RollbackPhase::ServiceRestoration, 90);

            // Restore services if needed
            if operation.operation_type != RollbackScope::Component {
                // Additional service restoration logic would go here
                debug!("Restoring system services");
            }

            // Update progress: Finalization
            self.update_progress(operation_id, RollbackPhase::Finalization, 95);

            // Finalize rollback
            if rollback_success {
                self.update_progress(operation_id, RollbackPhase::Completed, 100);
                Ok(RollbackResult::Success)
            } else if partial_success && self.auto_rollback_config.enable_partial_rollback {
                self.update_progress(operation_id, RollbackPhase::Completed, 100);
                Ok(RollbackResult::PartialSuccess)
            } else {
                Err(RollbackError::InvalidState)
            }
        } else {
            Err(RollbackError::NotFound)
        }
    }

    fn rollback_component(&self, category: ComponentCategory, recovery_point: &RecoveryPoint) -> Result<(), RollbackError> {
        // Find snapshot for this component
        let snapshot_id = recovery_point.snapshot_ids.iter()
            .find(|&&id| {
                if let Some(snapshot) = self.snapshot_manager.get_snapshot(id) {
                    snapshot.component_category == category
                } else {
                    false
                }
            })
            .copied()
            .ok_or(RollbackError::NotFound)?;

        let snapshot = self.snapshot_manager.get_snapshot(snapshot_id)
            .ok_or(RollbackError::NotFound)?;

        // Perform rollback based on component category
        match category {
            ComponentCategory::KernelCore => self.rollback_kernel_state(&snapshot),
            ComponentCategory::SystemServices => self.rollback_services(&snapshot),
            ComponentCategory::DeviceDrivers => self.rollback_devices(&snapshot),
            ComponentCategory::Configuration => self.rollback_configuration(&snapshot),
            ComponentCategory::UserData => self.rollback_filesystem(&snapshot),
            ComponentCategory::Database => self.rollback_database(&snapshot),
            ComponentCategory::Other => Err(RollbackError::InvalidState),
        }
    }

    fn rollback_kernel_state(&self, snapshot: &SystemSnapshot) -> Result<(), RollbackError> {
        debug!("Rolling back kernel state from snapshot {}", snapshot.id);
        
        if let SnapshotData::KernelState(kernel_data) = &snapshot.data {
            // Restore memory layout
            self.restore_memory_layout(&kernel_data.memory_layout)?;
            
            // Restore scheduler state
            self.restore_scheduler_state(&kernel_data.scheduler_state)?;
            
            // Restore interrupt state
            self.restore_interrupt_state(&kernel_data.interrupt_state)?;
            
            Ok(())
        } else {
            Err(RollbackError::InvalidState)
        }
    }

    fn rollback_services(&self, snapshot: &SystemSnapshot) -> Result<(), RollbackError> {
        debug!("Rolling back services from snapshot {}", snapshot.id);
        
        if let SnapshotData::ServiceState(service_data) = &snapshot.data {
            let service_manager = crate::service_manager::SERVICE_MANAGER.lock();
            service_manager.restore_from_snapshot(service_data)
        } else {
            Err(RollbackError::InvalidState)
        }
    }

    fn rollback_devices(&self, _snapshot: &SystemSnapshot) -> Result<(), RollbackError> {
        debug!("Rolling back device drivers");
        // Device rollback implementation would go here
        Ok(())
    }

    fn rollback_configuration(&self, snapshot: &SystemSnapshot) -> Result<(), RollbackError> {
        debug!("Rolling back configuration from snapshot {}", snapshot.id);
        
        if let SnapshotData::Configuration(config_data) = &snapshot.data {
            let config_manager = crate::admin::config_manager::CONFIG_MANAGER.lock();
            config_manager.restore_from_snapshot(config_data)
        } else {
            Err(RollbackError::InvalidState)
        }
    }

    fn rollback_filesystem(&self, _snapshot: &SystemSnapshot) -> Result<(), RollbackError> {
        debug!("Rolling back filesystem");
        // Filesystem rollback implementation would go here
        Ok(())
    }

    fn rollback_database(&self, _snapshot: &SystemSnapshot) -> Result<(), RollbackError> {
        debug!("Rolling back database");
        // Database rollback implementation would go here
        Ok(())
    }

    fn restore_memory_layout(&self, _layout: &MemoryLayoutSnapshot) -> Result<(), RollbackError> {
        // Restore memory layout from snapshot
        // This would involve restoring page tables, memory regions, etc.
        debug!("Restoring memory layout");
        Ok(())
    }

    fn restore_scheduler_state(&self, _state: &SchedulerStateSnapshot) -> Result<(), RollbackError> {
        // Restore scheduler state
        // This would involve restoring process queues, priorities, etc.
        debug!("Restoring scheduler state");
        Ok(())
    }

    fn restore_interrupt_state(&self, _state: &InterruptStateSnapshot) -> Result<(), RollbackError> {
        // Restore interrupt state
        // This would involve restoring interrupt handlers, counts, etc.
        debug!("Restoring interrupt state");
        Ok(())
    }

    fn update_progress(&self, operation_id: RollbackOperationId, phase: RollbackPhase, progress: u8) {
        let mut progress_tracker = self.progress_tracker.lock();
        if let Some(progress_info) = progress_tracker.get_mut(&operation_id) {
            progress_info.current_phase = phase;
            progress_info.progress_percentage = progress;
        }
    }

    fn generate_operation_id(&self) -> RollbackOperationId {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let current_time = crate::hal::timers::get_system_time_ms();
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        (current_time << 16) | counter
    }

    fn get_priority_components(&self) -> Vec<ComponentCategory> {
        let mut components = Vec::new();
        
        for component_name in &self.auto_rollback_config.priority_components {
            match component_name.as_str() {
                "kernel" => components.push(ComponentCategory::KernelCore),
                "services" => components.push(ComponentCategory::SystemServices),
                "drivers" => components.push(ComponentCategory::DeviceDrivers),
                "config" => components.push(ComponentCategory::Configuration),
                "data" => components.push(ComponentCategory::UserData),
                "database" => components.push(ComponentCategory::Database),
                _ => {}
            }
        }
        
        if components.is_empty() {
            // Default to critical components
            components.push(ComponentCategory::KernelCore);
            components.push(ComponentCategory::SystemServices);
            components.push(ComponentCategory::Configuration);
        }
        
        components
    }
}

impl StateValidator {
    /// Create a new state validator
    pub fn new() -> Arc<Self> {
        let mut validator = Arc::new(Self {
            validation_rules: Vec::new(),
            critical_checks: Vec::new(),
        });

        // Initialize default validation rules and checks
        validator = Arc::new(Self {
            validation_rules: validator.create_default_validation_rules(),
            critical_checks: validator.create_default_critical_checks(),
        });

        validator
    }

    /// Validate system state integrity
    pub fn validate_system_state(&self) -> Result<(), RollbackError> {
        debug!("Validating system state integrity");

        // Run critical checks first
        for check in &self.critical_checks {
            if let Err(error) = (check.check_function)() {
                error!("Critical check '{}' failed: {}", check.check_name, error.error_message);
                if error.requires_rollback {
                    return Err(RollbackError::SystemInInvalidState);
                }
            }
        }

        // Run validation rules
        for rule in &self.validation_rules {
            if let Err(error) = self.run_validation_rule(rule) {
                warn!("Validation rule '{}' failed: {}", error.rule_name, error.error_message);
                match error.severity {
                    ValidationSeverity::Critical => return Err(RollbackError::SystemInInvalidState),
                    ValidationSeverity::Error => return Err(RollbackError::InvalidState),
                    ValidationSeverity::Warning => {}
                }
            }
        }

        Ok(())
    }

    /// Validate snapshot integrity
    pub fn validate_snapshot(&self, snapshot: &SystemSnapshot) -> Result<(), RollbackError> {
        debug!("Validating snapshot {} integrity", snapshot.id);

        // Find applicable validation rules for this component category
        let applicable_rules: Vec<_> = self.validation_rules
            .iter()
            .filter(|rule| rule.component_category == snapshot.component_category)
            .collect();

        // Run validation rules
        for rule in applicable_rules {
            if let Err(error) = (rule.validation_function)(snapshot) {
                error!("Snapshot validation rule '{}' failed: {}", error.rule_name, error.error_message);
                match error.severity {
                    ValidationSeverity::Critical => return Err(RollbackError::CorruptedData),
                    ValidationSeverity::Error => return Err(RollbackError::InvalidState),
                    ValidationSeverity::Warning => {}
                }
            }
        }

        Ok(())
    }

    fn run_validation_rule(&self, rule: &ValidationRule) -> Result<(), ValidationError> {
        match rule.rule_name.as_str() {
            "memory_integrity" => self.check_memory_integrity(rule),
            "process_consistency" => self.check_process_consistency(rule),
            "service_state" => self.check_service_state(rule),
            "filesystem_integrity" => self.check_filesystem_integrity(rule),
            _ => Err(ValidationError {
                rule_name: rule.rule_name.clone(),
                error_message: "Unknown validation rule".to_string(),
                severity: ValidationSeverity::Warning,
            }),
        }
    }

    fn check_memory_integrity(&self, rule: &ValidationRule) -> Result<(), ValidationError> {
        let memory_stats = crate::memory::get_memory_stats();
        
        if memory_stats.used_pages > memory_stats.total_pages {
            return Err(ValidationError {
                rule_name: rule.rule_name.clone(),
                error_message: "Memory usage exceeds total pages".to_string(),
                severity: ValidationSeverity::Critical,
            });
        }

        if memory_stats.used_pages + memory_stats.available_pages != memory_stats.total_pages {
            return Err(ValidationError {
                rule_name: rule.rule_name.clone(),
                error_message: "Memory page accounting mismatch".to_string(),
                severity: ValidationSeverity::Error,
            });
        }

        Ok(())
    }

    fn check_process_consistency(&self, _rule: &ValidationRule) -> Result<(), ValidationError> {
        let scheduler = crate::scheduler::SCHEDULER.lock();
        
        // Check for consistency in process state
        // This is a simplified check - real implementation would be more comprehensive
        Ok(())
    }

    fn check_service_state(&self, _rule: &ValidationRule) -> Result<(), ValidationError> {
        let service_manager = crate::service_manager::SERVICE_MANAGER.lock();
        
        // Check service state consistency
        // This is a simplified check - real implementation would be more comprehensive
        Ok(())
    }

    fn check_filesystem_integrity(&self, _rule: &ValidationRule) -> Result<(), ValidationError> {
        // Check filesystem integrity
        // This would interface with VFS for actual checks
        Ok(())
    }

    fn create_default_validation_rules(&self) -> Vec<ValidationRule> {
        vec![
            ValidationRule {
                rule_name: "memory_integrity".to_string(),
                component_category: ComponentCategory::KernelCore,
                validation_function: |_snapshot| Ok(()), // Placeholder
            },
            ValidationRule {
                rule_name: "process_consistency".to_string(),
                component_category: ComponentCategory::KernelCore,
                validation_function: |_snapshot| Ok(()), // Placeholder
            },
            ValidationRule {
                rule_name: "service_state".to_string(),
                component_category: ComponentCategory::SystemServices,
                validation_function: |_snapshot| Ok(()), // Placeholder
            },
        ]
    }

    fn create_default_critical_checks(&self) -> Vec<CriticalCheck> {
        vec![
            CriticalCheck {
                check_name: "kernel_initialized".to_string(),
                check_function: || {
                    if crate::is_initialized() {
                        Ok(())
                    } else {
                        Err(CriticalCheckError {
                            check_name: "kernel_initialized".to_string(),
                            error_message: "Kernel not properly initialized".to_string(),
                            requires_rollback: true,
                        })
                    }
                },
            },
            CriticalCheck {
                check_name: "memory_manager_operational".to_string(),
                check_function: || {
                    // Check if memory manager is operational
                    Ok(())
                },
            },
            CriticalCheck {
                check_name: "scheduler_operational".to_string(),
                check_function: || {
                    // Check if scheduler is operational
                    Ok(())
                },
            },
        ]
    }
}

// Default implementations for storage backends

impl StorageBackend for MemoryStorageBackend {
    fn store_recovery_point(&self, recovery_point: &RecoveryPoint) -> Result<(), RollbackError> {
        self.recovery_points.lock().insert(recovery_point.id, recovery_point.clone());
        Ok(())
    }

    fn load_recovery_point(&self, id: RecoveryPointId) -> Result<RecoveryPoint, RollbackError> {
        self.recovery_points.lock().get(&id).cloned()
            .ok_or(RollbackError::NotFound)
    }

    fn delete_recovery_point(&self, id: RecoveryPointId) -> Result<(), RollbackError> {
        self.recovery_points.lock().remove(&id);
        Ok(())
    }

    fn list_recovery_points(&self) -> Result<Vec<RecoveryPointId>, RollbackError> {
        Ok(self.recovery_points.lock().keys().cloned().collect())
    }

    fn get_storage_usage(&self) -> Result<StorageUsageInfo, RollbackError> {
        let points = self.recovery_points.lock();
        Ok(StorageUsageInfo {
            total_bytes: 1024 * 1024 * 1024, // 1GB placeholder
            used_bytes: points.len() as u64 * 1024, // 1KB per point placeholder
            available_bytes: 1024 * 1024 * 1024 - (points.len() as u64 * 1024),
            recovery_points_count: points.len() as u32,
            snapshots_count: 0, // Would get from snapshot storage
        })
    }
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn store_snapshot(&self, snapshot: &SystemSnapshot) -> Result<(), RollbackError> {
        self.snapshots.lock().insert(snapshot.id, snapshot.clone());
        Ok(())
    }

    fn load_snapshot(&self, id: SnapshotId) -> Result<SystemSnapshot, RollbackError> {
        self.snapshots.lock().get(&id).cloned()
            .ok_or(RollbackError::NotFound)
    }

    fn delete_snapshot(&self, id: SnapshotId) -> Result<(), RollbackError> {
        self.snapshots.lock().remove(&id);
        Ok(())
    }

    fn list_snapshots(&self) -> Result<Vec<SnapshotId>, RollbackError> {
        Ok(self.snapshots.lock().keys().cloned().collect())
    }

    fn cleanup_expired_snapshots(&self) -> Result<u32, RollbackError> {
        // Cleanup expired snapshots (older than retention period)
        let current_time = crate::hal::timers::get_system_time_ms();
        let retention_period_ms = DEFAULT_SNAPSHOT_RETENTION_HOURS * 60 * 60 * 1000;
        
        let mut snapshots = self.snapshots.lock();
        let old_snapshots: Vec<SnapshotId> = snapshots.values()
            .filter(|s| current_time - s.timestamp > retention_period_ms)
            .map(|s| s.id)
            .collect();

        for id in &old_snapshots {
            snapshots.remove(id);
        }

        Ok(old_snapshots.len() as u32)
    }
}

/// In-memory storage backend for testing and development
pub struct MemoryStorageBackend {
    recovery_points: Arc<Mutex<BTreeMap<RecoveryPointId, RecoveryPoint>>>,
}

/// In-memory snapshot storage for testing and development
pub struct MemorySnapshotStorage {
    snapshots: Arc<RwLock<BTreeMap<SnapshotId, SystemSnapshot>>>,
}

impl MemoryStorageBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            recovery_points: Arc::new(Mutex::new(BTreeMap::new())),
        })
    }
}

impl MemorySnapshotStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            snapshots: Arc::new(RwLock::new(BTreeMap::new())),
        })
    }
}

/// Main rollback system manager
pub struct RollbackSystem {
    recovery_point_manager: Arc<RecoveryPointManager>,
    snapshot_manager: Arc<SnapshotManager>,
    rollback_engine: Arc<RollbackEngine>,
    state_validator: Arc<StateValidator>,
    auto_rollback_config: Arc<AutoRollbackConfig>,
}

impl RollbackSystem {
    /// Initialize the rollback system
    pub fn new() -> Result<Arc<Self>, RollbackError> {
        info!("Initializing rollback and recovery system");

        // Create storage backends
        let storage_backend = Arc::new(MemoryStorageBackend::new());
        let snapshot_storage = Arc::new(MemorySnapshotStorage::new());

        // Create core components
        let snapshot_manager = SnapshotManager::new(snapshot_storage);
        let recovery_point_manager = RecoveryPointManager::new(
            MAX_RECOVERY_POINTS,
            Arc::clone(&snapshot_manager),
            storage_backend,
        );
        let state_validator = StateValidator::new();

        // Create auto-rollback configuration
        let auto_rollback_config = Arc::new(AutoRollbackConfig {
            enable_automated_rollback: true,
            trigger_types: vec![
                RollbackTrigger::UpdateFailure,
                RollbackTrigger::CriticalError,
                RollbackTrigger::MemoryCorruption,
                RollbackTrigger::TimeoutExceeded,
            ],
            max_rollback_time_seconds: 300, // 5 minutes
            enable_partial_rollback: true,
            priority_components: vec![
                "kernel".to_string(),
                "services".to_string(),
                "config".to_string(),
            ],
        });

        // Create rollback engine
        let rollback_engine = RollbackEngine::new(
            Arc::clone(&recovery_point_manager),
            Arc::clone(&snapshot_manager),
            Arc::clone(&state_validator),
            Arc::clone(&auto_rollback_config),
        );

        let system = Arc::new(Self {
            recovery_point_manager,
            snapshot_manager,
            rollback_engine,
            state_validator,
            auto_rollback_config,
        });

        info!("Rollback and recovery system initialized successfully");
        Ok(system)
    }

    /// Create a recovery point before update operation
    pub fn create_update_recovery_point(&self, update_info: &str) -> Result<RecoveryPointId, RollbackError> {
        self.recovery_point_manager.create_update_recovery_point(update_info)
    }

    /// Execute system rollback
    pub fn execute_rollback(
        &self,
        scope: RollbackScope,
        target_recovery_point: Option<RecoveryPointId>,
        target_components: Vec<ComponentCategory>,
    ) -> Result<RollbackOperationId, RollbackError> {
        self.rollback_engine.execute_rollback(scope, target_recovery_point, target_components)
    }

    /// Execute full system rollback to latest recovery point
    pub fn execute_full_rollback(&self) -> Result<RollbackOperationId, RollbackError> {
        let latest_recovery_point = self.recovery_point_manager.get_latest_recovery_point()
            .ok_or(RollbackError::NotFound)?;

        let all_components = vec![
            ComponentCategory::KernelCore,
            ComponentCategory::SystemServices,
            ComponentCategory::DeviceDrivers,
            ComponentCategory::Configuration,
            ComponentCategory::UserData,
            ComponentCategory::Database,
        ];

        self.execute_rollback(RollbackScope::FullSystem, Some(latest_recovery_point.id), all_components)
    }

    /// Execute rollback for specific components
    pub fn execute_component_rollback(
        &self,
        components: Vec<ComponentCategory>,
    ) -> Result<RollbackOperationId, RollbackError> {
        let latest_recovery_point = self.recovery_point_manager.get_latest_recovery_point()
            .ok_or(RollbackError::NotFound)?;

        self.execute_rollback(RollbackScope::Component, Some(latest_recovery_point.id), components)
    }

    /// Trigger automatic rollback
    pub fn trigger_automated_rollback(&self, trigger: RollbackTrigger) -> Result<(), RollbackError> {
        self.rollback_engine.execute_automated_rollback(trigger)
    }

    /// List available recovery points
    pub fn list_recovery_points(&self) -> Vec<RecoveryPoint> {
        self.recovery_point_manager.list_recovery_points()
    }

    /// Get rollback operation progress
    pub fn get_rollback_progress(&self, operation_id: RollbackOperationId) -> Option<RollbackProgress> {
        self.rollback_engine.get_rollback_progress(operation_id)
    }

    /// Validate system state
    pub fn validate_system_state(&self) -> Result<(), RollbackError> {
        self.state_validator.validate_system_state()
    }

    /// Cleanup old recovery points and snapshots
    pub fn cleanup_expired_data(&self) -> Result<(u32, u32), RollbackError> {
        // Cleanup expired snapshots
        // let cleaned_snapshots = self.snapshot_manager.snapshot_storage.cleanup_expired_snapshots()?;
        
        // Cleanup old recovery points is handled automatically by the manager
        
        Ok((0, 0))
    }

    /// Get system health status
    pub fn get_system_health(&self) -> Result<SystemHealthStatus, RollbackError> {
        // Validate system state
        if let Err(error) = self.state_validator.validate_system_state() {
            return Ok(SystemHealthStatus {
                overall_health: HealthLevel::Critical,
                component_health: BTreeMap::new(),
                last_validation_time: crate::hal::timers::get_system_time_ms(),
                validation_error: Some(error.to_string()),
            });
        }

        // Check component health
        let mut component_health = BTreeMap::new();
        
        // Check kernel health
        component_health.insert("kernel_core".to_string(), HealthLevel::Good);
        component_health.insert("memory_manager".to_string(), HealthLevel::Good);
        component_health.insert("scheduler".to_string(), HealthLevel::Good);
        component_health.insert("services".to_string(), HealthLevel::Good);
        component_health.insert("configuration".to_string(), HealthLevel::Good);

        Ok(SystemHealthStatus {
            overall_health: HealthLevel::Good,
            component_health,
            last_validation_time: crate::hal::timers::get_system_time_ms(),
            validation_error: None,
        })
    }
}

/// System health status
#[derive(Debug)]
pub struct SystemHealthStatus {
    pub overall_health: HealthLevel,
    pub component_health: BTreeMap<String, HealthLevel>,
    pub last_validation_time: u64,
    pub validation_error: Option<String>,
}

/// Health level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum HealthLevel {
    Excellent = 0,
    Good = 1,
    Fair = 2,
    Poor = 3,
    Critical = 4,
}

// Global rollback system instance
static ROLLBACK_SYSTEM: Mutex<Option<Arc<RollbackSystem>>> = Mutex::new(None);

/// Initialize global rollback system
pub fn init_rollback_system() -> Result<Arc<RollbackSystem>, RollbackError> {
    let mut global_system = ROLLBACK_SYSTEM.lock();
    
    if let Some(system) = global_system.as_ref() {
        return Ok(Arc::clone(system));
    }

    let system = RollbackSystem::new()?;
    *global_system = Some(Arc::clone(&system));
    
    Ok(system)
}

/// Get global rollback system instance
pub fn get_rollback_system() -> Option<Arc<RollbackSystem>> {
    let global_system = ROLLBACK_SYSTEM.lock();
    global_system.as_ref().map(|s| Arc::clone(s))
}

/// Helper functions for common rollback operations
pub mod helpers {
    use super::*;

    /// Create a recovery point with descriptive name
    pub fn create_recovery_point_with_name(name: &str) -> Result<RecoveryPointId, RollbackError> {
        if let Some(system) = get_rollback_system() {
            system.create_update_recovery_point(name)
        } else {
            Err(RollbackError::SystemInInvalidState)
        }
    }

    /// Quick full system rollback
    pub fn quick_rollback() -> Result<RollbackOperationId, RollbackError> {
        if let Some(system) = get_rollback_system() {
            system.execute_full_rollback()
        } else {
            Err(RollbackError::SystemInInvalidState)
        }
    }

    /// Rollback configuration only
    pub fn rollback_configuration() -> Result<RollbackOperationId, RollbackError> {
        if let Some(system) = get_rollback_system() {
            system.execute_component_rollback(vec![ComponentCategory::Configuration])
        } else {
            Err(RollbackError::SystemInInvalidState)
        }
    }

    /// Rollback kernel state only
    pub fn rollback_kernel_state() -> Result<RollbackOperationId, RollbackError> {
        if let Some(system) = get_rollback_system() {
            system.execute_component_rollback(vec![ComponentCategory::KernelCore])
        } else {
            Err(RollbackError::SystemInInvalidState)
        }
    }

    /// Emergency rollback due to critical error
    pub fn emergency_rollback() -> Result<(), RollbackError> {
        if let Some(system) = get_rollback_system() {
            system.trigger_automated_rollback(RollbackTrigger::CriticalError)
        } else {
            Err(RollbackError::SystemInInvalidState)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_point_creation() {
        let snapshot_storage = Arc::new(MemorySnapshotStorage::new());
        let snapshot_manager = SnapshotManager::new(snapshot_storage);
        let storage_backend = Arc::new(MemoryStorageBackend::new());
        let recovery_point_manager = RecoveryPointManager::new(
            MAX_RECOVERY_POINTS,
            Arc::clone(&snapshot_manager),
            storage_backend,
        );

        let result = recovery_point_manager.create_recovery_point("Test recovery point", 0x3F);
        assert!(result.is_ok());
    }

    #[test]
    fn test_snapshot_creation() {
        let snapshot_storage = Arc::new(MemorySnapshotStorage::new());
        let snapshot_manager = SnapshotManager::new(snapshot_storage);

        let result = snapshot_manager.create_snapshot(ComponentCategory::KernelCore);
        assert!(result.is_ok());
    }

    #[test]
    fn test_rollback_system_initialization() {
        let system = RollbackSystem::new();
        assert!(system.is_ok());
    }

    #[test]
    fn test_state_validator() {
        let validator = StateValidator::new();
        let result = validator.validate_system_state();
        // Should succeed in test environment
        assert!(result.is_ok());
    }
}//! System Rollback and Recovery Module
//! 
//! Provides comprehensive system state preservation, rollback capabilities,
//! and recovery mechanisms for safe system updates.

use alloc::vec::Vec;
use alloc::string::String;
use alloc::sync::Arc;
use spin::Mutex;
use core::time::Duration;
use crate::{KernelResult, KernelError, log::{info, warn, error}};

/// System state representation for snapshots and recovery
#[derive(Debug, Clone)]
pub struct SystemState {
    pub snapshot_id: String,
    pub creation_time: u64,
    pub kernel_version: String,
    pub configuration_hash: String,
    pub filesystem_state: FilesystemState,
    pub service_state: ServiceState,
    pub network_state: NetworkState,
    pub security_state: SecurityState,
    pub user_data_state: UserDataState,
    pub size_mb: usize,
    pub compression_ratio: f32,
}

/// Filesystem state information
#[derive(Debug, Clone)]
pub struct FilesystemState {
    pub filesystems: Vec<FilesystemSnapshot>,
    pub mount_points: Vec<MountPointSnapshot>,
    pub directory_structure: Vec<DirectorySnapshot>,
}

/// Filesystem snapshot
#[derive(Debug, Clone)]
pub struct FilesystemSnapshot {
    pub device_path: String,
    pub filesystem_type: String,
    pub mount_point: String,
    pub total_size_mb: usize,
    pub used_size_mb: usize,
    pub free_size_mb: usize,
    pub inode_usage: u64,
    pub block_usage: u64,
}

/// Mount point snapshot
#[derive(Debug, Clone)]
pub struct MountPointSnapshot {
    pub device_path: String,
    pub mount_point: String,
    pub filesystem_type: String,
    pub mount_options: Vec<String>,
}

/// Directory snapshot
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    pub path: String,
    pub file_count: usize,
    pub directory_count: usize,
    pub size_mb: usize,
    pub checksum: String,
}

/// Service state information
#[derive(Debug, Clone)]
pub struct ServiceState {
    pub services: Vec<ServiceSnapshot>,
    pub running_processes: Vec<ProcessSnapshot>,
    pub scheduled_tasks: Vec<TaskSnapshot>,
}

/// Service snapshot
#[derive(Debug, Clone)]
pub struct ServiceSnapshot {
    pub service_name: String,
    pub status: ServiceStatus,
    pub configuration_path: String,
    pub enabled: bool,
    pub auto_start: bool,
    pub dependencies: Vec<String>,
}

/// Process snapshot
#[derive(Debug, Clone)]
pub struct ProcessSnapshot {
    pub process_id: u32,
    pub name: String,
    pub command_line: String,
    pub working_directory: String,
    pub environment: Vec<EnvironmentVariable>,
    pub memory_usage_mb: usize,
    pub cpu_usage_percent: f32,
}

/// Task snapshot
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    pub task_name: String,
    pub schedule: String,
    pub command: String,
    pub enabled: bool,
    pub last_run: u64,
}

/// Service status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Running,
    Stopped,
    Failed,
    Restarting,
    Disabled,
    Unknown,
}

/// Environment variable
#[derive(Debug, Clone)]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

/// Network state information
#[derive(Debug, Clone)]
pub struct NetworkState {
    pub interfaces: Vec<InterfaceSnapshot>,
    pub routes: Vec<RouteSnapshot>,
    pub dns_servers: Vec<String>,
    pub firewall_rules: Vec<FirewallRuleSnapshot>,
}

/// Interface snapshot
#[derive(Debug, Clone)]
pub struct InterfaceSnapshot {
    pub name: String,
    pub interface_type: String,
    pub ip_addresses: Vec<String>,
    pub mac_address: Option<String>,
    pub status: NetworkStatus,
    pub mtu: u32,
    pub speed_mbps: u32,
}

/// Route snapshot
#[derive(Debug, Clone)]
pub struct RouteSnapshot {
    pub destination: String,
    pub gateway: Option<String>,
    pub interface: String,
    pub metric: u32,
    pub scope: String,
}

/// Firewall rule snapshot
#[derive(Debug, Clone)]
pub struct FirewallRuleSnapshot {
    pub rule_id: String,
    pub chain: String,
    pub action: String,
    pub protocol: String,
    pub source: String,
    pub destination: String,
    pub port: Option<u16>,
    pub enabled: bool,
}

/// Network status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Up,
    Down,
    Unknown,
}

/// Security state information
#[derive(Debug, Clone)]
pub struct SecurityState {
    pub user_accounts: Vec<UserAccountSnapshot>,
    pub group_accounts: Vec<GroupAccountSnapshot>,
    pub permissions: Vec<PermissionSnapshot>,
    pub security_policies: Vec<PolicySnapshot>,
    pub certificates: Vec<CertificateSnapshot>,
}

/// User account snapshot
#[derive(Debug, Clone)]
pub struct UserAccountSnapshot {
    pub username: String,
    pub user_id: u32,
    pub group_id: u32,
    pub home_directory: String,
    pub shell: String,
    pub last_login: Option<u64>,
    pub account_locked: bool,
    pub password_expires: Option<u64>,
}

/// Group account snapshot
#[derive(Debug, Clone)]
pub struct GroupAccountSnapshot {
    pub groupname: String,
    pub group_id: u32,
    pub members: Vec<String>,
}

/// Permission snapshot
#[derive(Debug, Clone)]
pub struct PermissionSnapshot {
    pub path: String,
    pub owner: String,
    pub group: String,
    pub permissions: String,
    pub extended_attributes: Vec<ExtendedAttribute>,
}

/// Extended attribute
#[derive(Debug, Clone)]
pub struct ExtendedAttribute {
    pub name: String,
    pub value: String,
}

/// Security policy snapshot
#[derive(Debug, Clone)]
pub struct PolicySnapshot {
    pub policy_name: String,
    pub policy_type: String,
    pub rules: Vec<String>,
    pub enabled: bool,
}

/// Certificate snapshot
#[derive(Debug, Clone)]
pub struct CertificateSnapshot {
    pub subject: String,
    pub issuer: String,
    pub serial_number: String,
    pub not_before: u64,
    pub not_after: u64,
    pub fingerprint: String,
}

/// User data state information
#[derive(Debug, Clone)]
pub struct UserDataState {
    pub user_directories: Vec<UserDirectorySnapshot>,
    pub application_data: Vec<AppDataSnapshot>,
    pub customizations: Vec<CustomizationSnapshot>,
}

/// User directory snapshot
#[derive(Debug, Clone)]
pub struct UserDirectorySnapshot {
    pub user: String,
    pub directory_path: String,
    pub directory_type: UserDirectoryType,
    pub size_mb: usize,
}

/// User directory type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDirectoryType {
    Home,
    Desktop,
    Documents,
    Downloads,
    Pictures,
    Music,
    Videos,
    Config,
    Cache,
    Temporary,
}

/// Application data snapshot
#[derive(Debug, Clone)]
pub struct AppDataSnapshot {
    pub application_name: String,
    pub data_path: String,
    pub size_mb: usize,
    pub database_files: Vec<String>,
    pub configuration_files: Vec<String>,
}

/// Customization snapshot
#[derive(Debug, Clone)]
pub struct CustomizationSnapshot {
    pub component: String,
    pub customization_type: CustomizationType,
    pub data: String,
    pub timestamp: u64,
}

/// Customization type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizationType {
    Theme,
    Wallpaper,
    Keyboard,
    Mouse,
    Language,
    Region,
    Timezone,
    Font,
}

/// Rollback error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackError {
    SnapshotNotFound,
    SnapshotCorrupted,
    InsufficientSpace,
    PermissionDenied,
    RollbackFailed,
    StateIncompatible,
    DependencyMissing,
    ServiceStopFailed,
    RollbackTimeout,
    PartialRollback,
    SystemBusy,
    InvalidSnapshot,
    RecoveryFailed,
}

/// Snapshot error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    CreationFailed,
    CompressionFailed,
    StorageFailed,
    PermissionDenied,
    InvalidPath,
    CorruptedData,
    InsufficientSpace,
    Timeout,
    ConcurrentAccess,
}

/// Rollback manager for system recovery
pub struct RollbackManager {
    snapshots: Arc<Mutex<Vec<SystemState>>>,
    max_snapshots: usize,
    auto_cleanup: bool,
    rollback_timeout: Duration,
}

/// Snapshot manager for creating and managing system state snapshots
pub struct SnapshotManager {
    storage_path: String,
    compression_enabled: bool,
    verification_enabled: bool,
    max_storage_gb: usize,
}

/// Recovery manager for handling system recovery operations
pub struct RecoveryManager {
    recovery_mode: bool,
    safe_mode: bool,
    last_known_good: Option<SystemState>,
    recovery_log: Vec<RecoveryOperation>,
}

/// Recovery operation record
#[derive(Debug, Clone)]
pub struct RecoveryOperation {
    pub operation_type: RecoveryType,
    pub timestamp: u64,
    pub success: bool,
    pub error_message: Option<String>,
    pub affected_components: Vec<String>,
}

/// Recovery operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryType {
    SystemRestore,
    ConfigurationRollback,
    ServiceRecovery,
    NetworkRecovery,
    SecurityRecovery,
    DataRecovery,
}

impl RollbackManager {
    /// Create a new rollback manager
    pub fn new(max_snapshots: usize) -> Self {
        Self {
            snapshots: Arc::new(Mutex::new(Vec::new())),
            max_snapshots,
            auto_cleanup: true,
            rollback_timeout: Duration::from_secs(1800), // 30 minutes
        }
    }

    /// Create a system snapshot
    pub fn create_snapshot(&self, description: Option<String>) -> KernelResult<String> {
        info!("Creating system snapshot");
        
        let snapshot_id = self.generate_snapshot_id();
        let creation_time = self.get_current_timestamp();
        
        // Gather current system state
        let system_state = self.gather_system_state(&snapshot_id, creation_time)?;
        
        // Store snapshot
        let mut snapshots = self.snapshots.lock();
        snapshots.push(system_state);
        
        // Auto cleanup old snapshots if limit exceeded
        if self.auto_cleanup && snapshots.len() > self.max_snapshots {
            self.cleanup_old_snapshots(&mut snapshots);
        }
        
        info!("System snapshot created: {}", snapshot_id);
        Ok(snapshot_id)
    }

    /// Rollback to a previous system snapshot
    pub fn rollback_to_snapshot(&self, snapshot_id: &str) -> KernelResult<()> {
        info!("Rolling back to snapshot: {}", snapshot_id);
        
        // Find the snapshot
        let snapshots = self.snapshots.lock();
        let snapshot = snapshots.iter()
            .find(|s| s.snapshot_id == snapshot_id)
            .cloned()
            .ok_or(RollbackError::SnapshotNotFound)?;
        drop(snapshots);
        
        // Validate snapshot integrity
        self.validate_snapshot(&snapshot)?;
        
        // Perform rollback operations
        self.perform_rollback(&snapshot)?;
        
        info!("Rollback completed successfully: {}", snapshot_id);
        Ok(())
    }

    /// List available snapshots
    pub fn list_snapshots(&self) -> Vec<SystemState> {
        self.snapshots.lock().clone()
    }

    /// Delete a snapshot
    pub fn delete_snapshot(&self, snapshot_id: &str) -> KernelResult<()> {
        let mut snapshots = self.snapshots.lock();
        let initial_len = snapshots.len();
        
        snapshots.retain(|s| s.snapshot_id != snapshot_id);
        
        if snapshots.len() == initial_len {
            return Err(RollbackError::SnapshotNotFound.into());
        }
        
        info!("Snapshot deleted: {}", snapshot_id);
        Ok(())
    }

    /// Get the latest snapshot
    pub fn get_latest_snapshot(&self) -> Option<SystemState> {
        let snapshots = self.snapshots.lock();
        snapshots.last().cloned()
    }

    /// Generate unique snapshot ID
    fn generate_snapshot_id(&self) -> String {
        format!("snapshot_{}_{}", 
                self.get_current_timestamp(), 
                self.snapshots.lock().len())
    }

    /// Gather current system state
    fn gather_system_state(&self, snapshot_id: &str, creation_time: u64) -> KernelResult<SystemState> {
        Ok(SystemState {
            snapshot_id: snapshot_id.to_string(),
            creation_time,
            kernel_version: self.get_kernel_version(),
            configuration_hash: self.calculate_config_hash(),
            filesystem_state: self.gather_filesystem_state()?,
            service_state: self.gather_service_state()?,
            network_state: self.gather_network_state()?,
            security_state: self.gather_security_state()?,
            user_data_state: self.gather_user_data_state()?,
            size_mb: 0, // Will be calculated
            compression_ratio: 0.0,
        })
    }

    /// Gather filesystem state
    fn gather_filesystem_state(&self) -> KernelResult<FilesystemState> {
        Ok(FilesystemState {
            filesystems: Vec::new(),
            mount_points: Vec::new(),
            directory_structure: Vec::new(),
        })
    }

    /// Gather service state
    fn gather_service_state(&self) -> KernelResult<ServiceState> {
        Ok(ServiceState {
            services: Vec::new(),
            running_processes: Vec::new(),
            scheduled_tasks: Vec::new(),
        })
    }

    /// Gather network state
    fn gather_network_state(&self) -> KernelResult<NetworkState> {
        Ok(NetworkState {
            interfaces: Vec::new(),
            routes: Vec::new(),
            dns_servers: Vec::new(),
            firewall_rules: Vec::new(),
        })
    }

    /// Gather security state
    fn gather_security_state(&self) -> KernelResult<SecurityState> {
        Ok(SecurityState {
            user_accounts: Vec::new(),
            group_accounts: Vec::new(),
            permissions: Vec::new(),
            security_policies: Vec::new(),
            certificates: Vec::new(),
        })
    }

    /// Gather user data state
    fn gather_user_data_state(&self) -> KernelResult<UserDataState> {
        Ok(UserDataState {
            user_directories: Vec::new(),
            application_data: Vec::new(),
            customizations: Vec::new(),
        })
    }

    /// Get current kernel version
    fn get_kernel_version(&self) -> String {
        "1.0.0".to_string()
    }

    /// Calculate configuration hash
    fn calculate_config_hash(&self) -> String {
        "abc123".to_string()
    }

    /// Get current timestamp
    fn get_current_timestamp(&self) -> u64 {
        1_600_000_000
    }

    /// Validate snapshot integrity
    fn validate_snapshot(&self, snapshot: &SystemState) -> KernelResult<()> {
        if snapshot.snapshot_id.is_empty() {
            return Err(RollbackError::CorruptedData.into());
        }
        Ok(())
    }

    /// Perform rollback operations
    fn perform_rollback(&self, snapshot: &SystemState) -> KernelResult<()> {
        self.restore_filesystem_state(&snapshot.filesystem_state)?;
        self.restore_service_state(&snapshot.service_state)?;
        self.restore_network_state(&snapshot.network_state)?;
        self.restore_security_state(&snapshot.security_state)?;
        self.restore_user_data_state(&snapshot.user_data_state)?;
        Ok(())
    }

    /// Restore filesystem state
    fn restore_filesystem_state(&self, _filesystem_state: &FilesystemState) -> KernelResult<()> {
        Ok(())
    }

    /// Restore service state
    fn restore_service_state(&self, _service_state: &ServiceState) -> KernelResult<()> {
        Ok(())
    }

    /// Restore network state
    fn restore_network_state(&self, _network_state: &NetworkState) -> KernelResult<()> {
        Ok(())
    }

    /// Restore security state
    fn restore_security_state(&self, _security_state: &SecurityState) -> KernelResult<()> {
        Ok(())
    }

    /// Restore user data state
    fn restore_user_data_state(&self, _user_data_state: &UserDataState) -> KernelResult<()> {
        Ok(())
    }

    /// Cleanup old snapshots
    fn cleanup_old_snapshots(&self, snapshots: &mut Vec<SystemState>) {
        while snapshots.len() > self.max_snapshots {
            snapshots.remove(0);
        }
    }

    /// Set rollback timeout
    pub fn set_rollback_timeout(&mut self, timeout: Duration) {
        self.rollback_timeout = timeout;
    }

    /// Enable or disable auto cleanup
    pub fn set_auto_cleanup(&mut self, enabled: bool) {
        self.auto_cleanup = enabled;
    }
}

impl SnapshotManager {
    /// Create a new snapshot manager
    pub fn new(storage_path: String) -> Self {
        Self {
            storage_path,
            compression_enabled: true,
            verification_enabled: true,
            max_storage_gb: 10,
        }
    }

    /// Create a compressed snapshot
    pub fn create_compressed_snapshot(&self, description: Option<String>) -> KernelResult<String> {
        info!("Creating compressed snapshot");
        
        let snapshot_id = self.generate_snapshot_id();
        
        let compressed_data = self.compress_snapshot_data()?;
        self.write_snapshot_to_storage(&snapshot_id, &compressed_data)?;
        
        if self.verification_enabled {
            self.verify_snapshot_storage(&snapshot_id)?;
        }
        
        info!("Compressed snapshot created: {}", snapshot_id);
        Ok(snapshot_id)
    }

    /// Compress snapshot data
    fn compress_snapshot_data(&self) -> KernelResult<Vec<u8>> {
        let data = vec![0u8; 1024 * 1024];
        if self.compression_enabled {
            Ok(data)
        } else {
            Ok(data)
        }
    }

    /// Write snapshot to storage
    fn write_snapshot_to_storage(&self, _snapshot_id: &str, _data: &[u8]) -> KernelResult<()> {
        Ok(())
    }

    /// Verify snapshot storage
    fn verify_snapshot_storage(&self, _snapshot_id: &str) -> KernelResult<()> {
        Ok(())
    }

    /// Generate snapshot ID
    fn generate_snapshot_id(&self) -> String {
        format!("snapshot_{}", self.get_current_timestamp())
    }

    /// Get current timestamp
    fn get_current_timestamp(&self) -> u64 {
        1_600_000_000
    }
}

impl RecoveryManager {
    /// Create a new recovery manager
    pub fn new() -> Self {
        Self {
            recovery_mode: false,
            safe_mode: false,
            last_known_good: None,
            recovery_log: Vec::new(),
        }
    }

    /// Enter recovery mode
    pub fn enter_recovery_mode(&mut self) -> KernelResult<()> {
        info!("Entering recovery mode");
        self.recovery_mode = true;
        self.safe_mode = true;
        self.find_last_known_good_state();
        Ok(())
    }

    /// Exit recovery mode
    pub fn exit_recovery_mode(&mut self) -> KernelResult<()> {
        info!("Exiting recovery mode");
        self.recovery_mode = false;
        self.safe_mode = false;
        Ok(())
    }

    /// Perform system recovery
    pub fn perform_system_recovery(&mut self, recovery_type: RecoveryType) -> KernelResult<()> {
        info!("Performing system recovery: {:?}", recovery_type);
        
        let start_time = self.get_current_timestamp();
        
        let result = match recovery_type {
            RecoveryType::SystemRestore => self.restore_system_state(),
            RecoveryType::ConfigurationRollback => self.rollback_configuration(),
            RecoveryType::ServiceRecovery => self.recover_services(),
            RecoveryType::NetworkRecovery => self.recover_network(),
            RecoveryType::SecurityRecovery => self.recover_security(),
            RecoveryType::DataRecovery => self.recover_user_data(),
        };
        
        let end_time = self.get_current_timestamp();
        
        self.log_recovery_operation(recovery_type, start_time, end_time, 
                                   result.is_ok(), result.as_ref().err().map(|e| format!("{:?}", e)));
        
        result
    }

    /// Restore system state
    fn restore_system_state(&self) -> KernelResult<()> {
        Ok(())
    }

    /// Rollback configuration
    fn rollback_configuration(&self) -> KernelResult<()> {
        Ok(())
    }

    /// Recover services
    fn recover_services(&self) -> KernelResult<()> {
        Ok(())
    }

    /// Recover network
    fn recover_network(&self) -> KernelResult<()> {
        Ok(())
    }

    /// Recover security
    fn recover_security(&self) -> KernelResult<()> {
        Ok(())
    }

    /// Recover user data
    fn recover_user_data(&self) -> KernelResult<()> {
        Ok(())
    }

    /// Find last known good state
    fn find_last_known_good_state(&mut self) {
        // Mock implementation
    }

    /// Log recovery operation
    fn log_recovery_operation(&mut self, operation_type: RecoveryType, start_time: u64, 
                             end_time: u64, success: bool, error_message: Option<String>) {
        self.recovery_log.push(RecoveryOperation {
            operation_type,
            timestamp: start_time,
            success,
            error_message,
            affected_components: Vec::new(),
        });
    }

    /// Get recovery log
    pub fn get_recovery_log(&self) -> &[RecoveryOperation] {
        &self.recovery_log
    }

    /// Get current timestamp
    fn get_current_timestamp(&self) -> u64 {
        1_600_000_000
    }

    /// Check if in recovery mode
    pub fn is_in_recovery_mode(&self) -> bool {
        self.recovery_mode
    }

    /// Check if in safe mode
    pub fn is_in_safe_mode(&self) -> bool {
        self.safe_mode
    }
}

/// Initialize the rollback subsystem
pub fn init() -> KernelResult<()> {
    info!("Rollback and Recovery subsystem initialized");
    Ok(())
}