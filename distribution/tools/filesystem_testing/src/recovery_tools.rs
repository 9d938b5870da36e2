//! File System Recovery Tools
//! 
//! Comprehensive file system recovery and repair tools including:
//! - Corrupted file system recovery
//! - Orphaned file recovery
//! - Data salvage from damaged file systems
//! - Backup and restore functionality
//! - File system restoration from images

use super::{TestResult, TestSuite, TestCase};
use super::test_suite::{BaseTestSuite, BaseTestCase};
use alloc::vec::Vec;
use alloc::string::String;
use alloc::collections::HashMap;
use log::{info, warn, error, debug};

/// Recovery operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOperation {
    RepairCorruption,
    RecoverOrphanedFiles,
    SalvageData,
    RestoreFromBackup,
    RecreateDirectoryStructure,
    FixPermissions,
    RecoverDeletedFiles,
}

/// Recovery statistics
#[derive(Debug, Clone, Default)]
pub struct RecoveryStats {
    pub files_recovered: u64,
    pub directories_recovered: u64,
    pub blocks_recovered: u64,
    pub errors_repaired: u64,
    pub backup_size_bytes: u64,
    pub recovery_time_ms: u64,
    pub success_rate: f64,
}

/// Recovery configuration
#[derive(Debug, Clone)]
pub struct RecoveryConfig {
    pub dry_run: bool,
    pub create_backup: bool,
    pub recover_deleted: bool,
    pub deep_scan: bool,
    pub max_recovery_size_mb: usize,
    pub backup_location: Option<String>,
    pub recovery_timeout_ms: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            create_backup: true,
            recover_deleted: true,
            deep_scan: false,
            max_recovery_size_mb: 1024,
            backup_location: None,
            recovery_timeout_ms: 300000, // 5 minutes
        }
    }
}

/// Recovery progress tracking
#[derive(Debug, Clone)]
pub struct RecoveryProgress {
    pub operation: RecoveryOperation,
    pub percent_complete: f64,
    pub current_phase: String,
    pub files_processed: u64,
    pub total_files: u64,
    pub current_file: Option<String>,
    pub error_count: u64,
    pub warning_count: u64,
}

impl RecoveryProgress {
    pub fn new(operation: RecoveryOperation) -> Self {
        Self {
            operation,
            percent_complete: 0.0,
            current_phase: String::new(),
            files_processed: 0,
            total_files: 0,
            current_file: None,
            error_count: 0,
            warning_count: 0,
        }
    }

    pub fn update_progress(&mut self, percent: f64, phase: &str) {
        self.percent_complete = percent;
        self.current_phase = phase.to_string();
    }

    pub fn increment_files(&mut self, filename: Option<&str>) {
        self.files_processed += 1;
        if let Some(name) = filename {
            self.current_file = Some(name.to_string());
        }
    }
}

/// File system recovery tool
pub struct FileSystemRecovery {
    config: RecoveryConfig,
    stats: RecoveryStats,
}

impl FileSystemRecovery {
    pub fn new(config: RecoveryConfig) -> Self {
        Self {
            config,
            stats: RecoveryStats::default(),
        }
    }

    /// Perform comprehensive file system recovery
    pub fn run_recovery(&mut self) -> Result<RecoveryStats, &'static str> {
        let start_time = std::time::Instant::now();
        info!("Starting file system recovery with config: {:?}", self.config);

        // Phase 1: Create backup if requested
        if self.config.create_backup && !self.config.dry_run {
            self.create_backup()?;
        }

        // Phase 2: Scan for corruption
        let corruption_detected = self.scan_for_corruption();

        if corruption_detected {
            info!("Corruption detected, attempting repair...");
            
            // Phase 3: Repair corruption
            self.repair_corruption()?;

            // Phase 4: Recover orphaned files
            self.recover_orphaned_files()?;

            // Phase 5: Fix permissions
            self.fix_permissions()?;

            if self.config.recover_deleted {
                // Phase 6: Attempt deleted file recovery
                self.recover_deleted_files()?;
            }

            if self.config.deep_scan {
                // Phase 7: Deep scan for salvageable data
                self.salvage_data()?;
            }
        } else {
            info!("No corruption detected, performing routine maintenance");
            self.recover_orphaned_files()?;
            self.fix_permissions()?;
        }

        // Update recovery statistics
        self.stats.recovery_time_ms = start_time.elapsed().as_millis() as u64;
        self.stats.success_rate = if self.stats.files_recovered > 0 {
            (self.stats.files_recovered as f64 / (self.stats.files_recovered + self.stats.error_count) as f64) * 100.0
        } else {
            100.0
        };

        info!("Recovery completed. Stats: {:?}", self.stats);
        Ok(self.stats.clone())
    }

    /// Create backup of current file system state
    fn create_backup(&mut self) -> Result<(), &'static str> {
        info!("Creating file system backup...");
        let mut progress = RecoveryProgress::new(RecoveryOperation::RestoreFromBackup);
        progress.update_progress(0.0, "Creating backup");

        // Simulate backup creation
        let backup_size = 100 * 1024 * 1024; // 100MB simulated
        self.stats.backup_size_bytes = backup_size;

        progress.update_progress(100.0, "Backup created");
        info!("Backup created successfully ({} bytes)", backup_size);

        Ok(())
    }

    /// Scan file system for corruption
    fn scan_for_corruption(&self) -> bool {
        info!("Scanning for file system corruption...");
        
        // In a real implementation, this would perform actual corruption detection
        // For now, we'll simulate finding some corruption
        
        let corruption_detected = true; // Simulate corruption found
        
        if corruption_detected {
            warn!("File system corruption detected!");
        } else {
            info!("No corruption detected");
        }
        
        corruption_detected
    }

    /// Repair identified corruption
    fn repair_corruption(&mut self) -> Result<(), &'static str> {
        info!("Repairing file system corruption...");
        let mut progress = RecoveryProgress::new(RecoveryOperation::RepairCorruption);
        progress.update_progress(0.0, "Analyzing corruption");

        // Simulate corruption repair process
        let repairs_performed = 5; // Simulated number of repairs
        
        for i in 0..repairs_performed {
            progress.update_progress((i as f64 / repairs_performed as f64) * 100.0, 
                                   &format!("Repairing issue {}", i + 1));
            
            // Simulate repair work
            std::thread::sleep(std::time::Duration::from_millis(100));
            
            self.stats.errors_repaired += 1;
            info!("Repaired corruption issue {}", i + 1);
        }

        progress.update_progress(100.0, "Corruption repair completed");
        info!("Successfully repaired {} corruption issues", self.stats.errors_repaired);

        Ok(())
    }

    /// Recover orphaned files
    fn recover_orphaned_files(&mut self) -> Result<(), &'static str> {
        info!("Recovering orphaned files...");
        let mut progress = RecoveryProgress::new(RecoveryOperation::RecoverOrphanedFiles);
        progress.total_files = 50; // Simulated number of orphaned files
        
        // Simulate finding and recovering orphaned files
        for i in 0..progress.total_files {
            let filename = format!("recovered_file_{}.dat", i);
            progress.increment_files(Some(&filename));
            progress.update_progress((i as f64 / progress.total_files as f64) * 100.0, 
                                   &format!("Recovering {}", filename));

            // Simulate file recovery
            std::thread::sleep(std::time::Duration::from_millis(50));
            
            self.stats.files_recovered += 1;
            
            if i % 10 == 0 {
                info!("Recovered {} orphaned files", self.stats.files_recovered);
            }
        }

        progress.update_progress(100.0, "Orphaned file recovery completed");
        info!("Successfully recovered {} orphaned files", self.stats.files_recovered);

        Ok(())
    }

    /// Fix file permissions
    fn fix_permissions(&mut self) -> Result<(), &'static str> {
        info!("Fixing file permissions...");
        let mut progress = RecoveryProgress::new(RecoveryOperation::FixPermissions);
        progress.total_files = 1000; // Simulated number of files to fix
        
        let fixes_performed = 50; // Simulated permission fixes
        
        for i in 0..fixes_performed {
            let filename = format!("file_{}.dat", i);
            progress.increment_files(Some(&filename));
            progress.update_progress((i as f64 / fixes_performed as f64) * 100.0, 
                                   &format!("Fixing permissions for {}", filename));

            // Simulate permission fixing
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        progress.update_progress(100.0, "Permission fixes completed");
        info!("Fixed {} file permissions", fixes_performed);

        Ok(())
    }

    /// Attempt to recover deleted files
    fn recover_deleted_files(&mut self) -> Result<(), &'static str> {
        info!("Attempting to recover deleted files...");
        let mut progress = RecoveryProgress::new(RecoveryOperation::RecoverDeletedFiles);
        progress.total_files = 25; // Simulated number of deleted files to recover
        
        let recovered_deleted = 15; // Simulated recovered files
        
        for i in 0..recovered_deleted {
            let filename = format!("deleted_file_{}.dat", i);
            progress.increment_files(Some(&filename));
            progress.update_progress((i as f64 / recovered_deleted as f64) * 100.0, 
                                   &format!("Recovering deleted file {}", filename));

            // Simulate deleted file recovery
            std::thread::sleep(std::time::Duration::from_millis(100));
            
            self.stats.files_recovered += 1;
            info!("Recovered deleted file: {}", filename);
        }

        progress.update_progress(100.0, "Deleted file recovery completed");
        info!("Successfully recovered {} deleted files", recovered_deleted);

        Ok(())
    }

    /// Deep scan for salvageable data
    fn salvage_data(&mut self) -> Result<(), &'static str> {
        info!("Performing deep scan for salvageable data...");
        let mut progress = RecoveryProgress::new(RecoveryOperation::SalvageData);
        progress.update_progress(0.0, "Starting deep scan");

        let salvaged_blocks = 1000; // Simulated salvaged data blocks
        
        for i in 0..salvaged_blocks {
            if i % 100 == 0 {
                progress.update_progress((i as f64 / salvaged_blocks as f64) * 100.0, 
                                       &format!("Scanning block {}", i));
            }
            
            // Simulate data salvage work
            std::thread::sleep(std::time::Duration::from_millis(1));
            
            self.stats.blocks_recovered += 1;
        }

        progress.update_progress(100.0, "Deep scan completed");
        info!("Salvaged {} data blocks", self.stats.blocks_recovered);

        Ok(())
    }

    /// Restore file system from backup
    pub fn restore_from_backup(&mut self, backup_path: &str) -> Result<RecoveryStats, &'static str> {
        info!("Restoring file system from backup: {}", backup_path);
        
        let start_time = std::time::Instant::now();
        
        // Simulate restoration process
        std::thread::sleep(std::time::Duration::from_millis(500));
        
        self.stats.recovery_time_ms = start_time.elapsed().as_millis() as u64;
        self.stats.files_recovered = 500; // Simulated recovery
        self.stats.backup_size_bytes = 100 * 1024 * 1024;
        
        info!("Restore completed successfully");
        Ok(self.stats.clone())
    }
}

/// Recovery test suite
pub struct RecoveryTestSuite {
    recovery_tool: FileSystemRecovery,
    config: RecoveryConfig,
}

impl RecoveryTestSuite {
    pub fn new() -> Self {
        let config = RecoveryConfig::default();
        let recovery_tool = FileSystemRecovery::new(config.clone());
        
        Self {
            recovery_tool,
            config,
        }
    }

    pub fn with_config(config: RecoveryConfig) -> Self {
        let recovery_tool = FileSystemRecovery::new(config.clone());
        
        Self {
            recovery_tool,
            config,
        }
    }
}

impl TestSuite for RecoveryTestSuite {
    fn name(&self) -> &str {
        "RecoveryTools"
    }

    fn description(&self) -> &str {
        "Comprehensive file system recovery and repair testing including \
         corruption repair, orphaned file recovery, and data salvage"
    }

    fn run(&self) -> TestResult {
        info!("=== Starting File System Recovery Test Suite ===");

        // Test 1: Normal recovery operation
        info!("\n1. Testing normal recovery operation");
        let mut recovery_tool = FileSystemRecovery::new(RecoveryConfig::default());
        
        match recovery_tool.run_recovery() {
            Ok(stats) => {
                info!("Recovery completed successfully: {:?}", stats);
                
                if stats.errors_repaired > 0 {
                    info!("Successfully repaired {} corruption issues", stats.errors_repaired);
                }
                if stats.files_recovered > 0 {
                    info!("Recovered {} files", stats.files_recovered);
                }
                if stats.blocks_recovered > 0 {
                    info!("Salvaged {} data blocks", stats.blocks_recovered);
                }
            }
            Err(e) => {
                error!("Recovery failed: {}", e);
                return TestResult::Failed;
            }
        }

        // Test 2: Dry run test
        info!("\n2. Testing dry run recovery");
        let mut dry_run_config = RecoveryConfig::default();
        dry_run_config.dry_run = true;
        let mut dry_run_tool = FileSystemRecovery::new(dry_run_config);
        
        match dry_run_tool.run_recovery() {
            Ok(stats) => {
                if stats.backup_size_bytes > 0 {
                    info!("Dry run would create {} byte backup", stats.backup_size_bytes);
                } else {
                    info!("Dry run completed - no backup created in simulation");
                }
            }
            Err(e) => {
                error!("Dry run failed: {}", e);
                return TestResult::Failed;
            }
        }

        // Test 3: Backup and restore test
        info!("\n3. Testing backup and restore");
        let mut backup_tool = FileSystemRecovery::new(RecoveryConfig::default());
        let backup_path = "/tmp/test_backup.dat";
        
        match backup_tool.restore_from_backup(backup_path) {
            Ok(stats) => {
                info!("Restore from backup completed: {:?}", stats);
            }
            Err(e) => {
                error!("Restore failed: {}", e);
                return TestResult::Failed;
            }
        }

        info!("=== Recovery Test Suite Completed Successfully ===");
        TestResult::Passed
    }
}

/// Individual recovery test cases
pub struct CorruptionRepairTest {
    base: BaseTestCase,
    config: RecoveryConfig,
}

impl CorruptionRepairTest {
    pub fn new() -> Self {
        let mut config = RecoveryConfig::default();
        config.create_backup = true;
        config.recover_deleted = true;
        
        Self {
            base: BaseTestCase::new(
                "corruption_repair", 
                "Test file system corruption detection and repair"
            ).with_timeout(120000),
            config,
        }
    }
}

impl TestCase for CorruptionRepairTest {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn description(&self) -> &str {
        self.base.description()
    }

    fn run(&self) -> TestResult {
        let mut recovery = FileSystemRecovery::new(self.config.clone());
        
        match recovery.run_recovery() {
            Ok(stats) => {
                info!("Corruption repair completed with stats: {:?}", stats);
                
                if stats.errors_repaired > 0 {
                    info!("Successfully repaired corruption");
                    TestResult::Passed
                } else {
                    info!("No corruption was detected or repaired");
                    TestResult::Passed
                }
            }
            Err(e) => {
                error!("Corruption repair failed: {}", e);
                TestResult::Failed
            }
        }
    }

    fn timeout_ms(&self) -> u64 {
        self.base.timeout_ms()
    }
}

pub struct OrphanedFileRecoveryTest {
    base: BaseTestCase,
    config: RecoveryConfig,
}

impl OrphanedFileRecoveryTest {
    pub fn new() -> Self {
        let mut config = RecoveryConfig::default();
        config.dry_run = false;
        
        Self {
            base: BaseTestCase::new(
                "orphaned_file_recovery", 
                "Test orphaned file detection and recovery"
            ).with_timeout(60000),
            config,
        }
    }
}

impl TestCase for OrphanedFileRecoveryTest {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn description(&self) -> &str {
        self.base.description()
    }

    fn run(&self) -> TestResult {
        let mut recovery = FileSystemRecovery::new(self.config.clone());
        
        // Focus on orphaned file recovery
        match recovery.recover_orphaned_files() {
            Ok(_) => {
                if recovery.stats.files_recovered > 0 {
                    info!("Successfully recovered {} orphaned files", 
                          recovery.stats.files_recovered);
                    TestResult::Passed
                } else {
                    info!("No orphaned files found to recover");
                    TestResult::Passed
                }
            }
            Err(e) => {
                error!("Orphaned file recovery failed: {}", e);
                TestResult::Failed
            }
        }
    }

    fn timeout_ms(&self) -> u64 {
        self.base.timeout_ms()
    }
}

pub struct BackupRestoreTest {
    base: BaseTestCase,
}

impl BackupRestoreTest {
    pub fn new() -> Self {
        Self {
            base: BaseTestCase::new(
                "backup_restore", 
                "Test file system backup creation and restoration"
            ).with_timeout(60000),
        }
    }
}

impl TestCase for BackupRestoreTest {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn description(&self) -> &str {
        self.base.description()
    }

    fn run(&self) -> TestResult {
        let config = RecoveryConfig {
            create_backup: true,
            ..RecoveryConfig::default()
        };
        
        let mut recovery = FileSystemRecovery::new(config);
        
        // Test backup creation
        match recovery.run_recovery() {
            Ok(_) => {
                if recovery.stats.backup_size_bytes > 0 {
                    info!("Backup created: {} bytes", recovery.stats.backup_size_bytes);
                } else {
                    warn!("No backup was created");
                    return TestResult::Failed;
                }
            }
            Err(e) => {
                error!("Backup creation failed: {}", e);
                return TestResult::Failed;
            }
        }
        
        // Test restore from backup
        match recovery.restore_from_backup("/tmp/test_backup.dat") {
            Ok(_) => {
                info!("Restore from backup completed successfully");
                TestResult::Passed
            }
            Err(e) => {
                error!("Restore from backup failed: {}", e);
                TestResult::Failed
            }
        }
    }

    fn timeout_ms(&self) -> u64 {
        self.base.timeout_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_config_default() {
        let config = RecoveryConfig::default();
        assert!(!config.dry_run);
        assert!(config.create_backup);
        assert!(config.recover_deleted);
        assert_eq!(config.max_recovery_size_mb, 1024);
    }

    #[test]
    fn test_recovery_progress() {
        let mut progress = RecoveryProgress::new(RecoveryOperation::RepairCorruption);
        
        assert_eq!(progress.percent_complete, 0.0);
        assert!(progress.current_phase.is_empty());
        
        progress.update_progress(50.0, "Testing phase");
        assert_eq!(progress.percent_complete, 50.0);
        assert_eq!(progress.current_phase, "Testing phase");
        
        progress.increment_files(Some("test.txt"));
        assert_eq!(progress.files_processed, 1);
        assert_eq!(progress.current_file, Some("test.txt".to_string()));
    }

    #[test]
    fn test_recovery_stats_default() {
        let stats = RecoveryStats::default();
        assert_eq!(stats.files_recovered, 0);
        assert_eq!(stats.directories_recovered, 0);
        assert_eq!(stats.blocks_recovered, 0);
        assert_eq!(stats.errors_repaired, 0);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[test]
    fn test_recovery_operation_types() {
        assert_eq!(RecoveryOperation::RepairCorruption as u8, 0);
        assert_eq!(RecoveryOperation::RecoverOrphanedFiles as u8, 1);
        assert_eq!(RecoveryOperation::SalvageData as u8, 2);
    }
}