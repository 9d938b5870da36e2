//! Automated Update Scheduling System
//! 
//! This module provides intelligent update scheduling that minimizes system disruption
//! by analyzing usage patterns, managing priority-based updates, and coordinating with
//! system monitoring and resource management.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use spin::Mutex;

use crate::{
    log::{KernelLogger, LogLevel},
    security::SecurityManager,
    hal::timers::PeriodicTimer,
    service_manager::ServiceManager,
    memory::PhysicalAddress,
    scheduler,
};

/// Maximum number of pending updates
const MAX_PENDING_UPDATES: usize = 1000;

/// Maximum number of retry attempts
const MAX_RETRY_ATTEMPTS: usize = 3;

/// Default maintenance window duration (in minutes)
const DEFAULT_MAINTENANCE_WINDOW_MINUTES: u64 = 120;

/// Global update scheduler instance
static mut GLOBAL_SCHEDULER: Option<Arc<Mutex<UpdateScheduler>>> = None;

/// Set the global scheduler instance
pub fn set_global_scheduler(scheduler: Arc<Mutex<UpdateScheduler>>) {
    unsafe {
        GLOBAL_SCHEDULER = Some(scheduler);
    }
}

/// Get the global scheduler instance
pub fn get_global_scheduler() -> Option<Arc<Mutex<UpdateScheduler>>> {
    unsafe { GLOBAL_SCHEDULER.as_ref().cloned() }
}

/// Update priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum UpdatePriority {
    /// Critical security updates - immediate execution
    Critical = 0,
    /// Important security updates - within 24 hours
    Security = 1,
    /// System updates - within 1 week
    Important = 2,
    /// Optional feature updates - flexible scheduling
    Optional = 3,
    /// Low priority updates - best effort
    Low = 4,
}

/// Update frequency policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFrequency {
    /// Automatic daily updates
    Daily,
    /// Weekly updates (configurable day)
    Weekly { day: u8 }, // 0-6, Sunday = 0
    /// Monthly updates (configurable day)
    Monthly { day: u8 }, // 1-31
    /// Manual updates only
    Manual,
    /// Automatic based on system usage patterns
    Adaptive,
}

/// System usage patterns
#[derive(Debug, Clone, Default)]
pub struct UsagePattern {
    /// Average CPU usage by hour (0-23)
    pub cpu_usage_by_hour: [f32; 24],
    /// Average memory usage by hour
    pub memory_usage_by_hour: [f32; 24],
    /// Active user sessions by hour
    pub active_sessions_by_hour: [u32; 24],
    /// I/O activity by hour
    pub io_activity_by_hour: [f32; 24],
    /// Peak usage hours
    pub peak_hours: [bool; 24],
    /// Idle hours (low activity)
    pub idle_hours: [bool; 24],
}

/// Maintenance window configuration
#[derive(Debug, Clone)]
pub struct MaintenanceWindow {
    /// Start hour (0-23)
    pub start_hour: u8,
    /// Duration in hours
    pub duration_hours: u8,
    /// Days of week when maintenance is allowed (bitmask: 0b1111111 = all days)
    pub allowed_days: u8,
    /// Timezone offset in minutes
    pub timezone_offset_minutes: i16,
}

/// Update schedule configuration
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Update frequency policy
    pub frequency: UpdateFrequency,
    /// Maintenance window settings
    pub maintenance_window: MaintenanceWindow,
    /// Priority override settings
    pub priority_overrides: alloc::vec::Vec<UpdatePriority>,
    /// Enable automatic scheduling
    pub auto_scheduling: bool,
    /// Notification settings
    pub notification_enabled: bool,
    /// Require user approval for updates
    pub require_approval: bool,
    /// Maximum concurrent updates
    pub max_concurrent_updates: usize,
}

/// Update task representation
#[derive(Debug, Clone)]
pub struct UpdateTask {
    /// Unique update identifier
    pub id: u64,
    /// Update priority
    pub priority: UpdatePriority,
    /// Scheduled execution time
    pub scheduled_time: Option<u64>,
    /// Estimated duration (in minutes)
    pub estimated_duration: u32,
    /// Update type and metadata
    pub update_type: UpdateType,
    /// Retry count
    pub retry_count: usize,
    /// Status
    pub status: UpdateStatus,
}

/// Types of updates
#[derive(Debug, Clone)]
pub enum UpdateType {
    /// Security patch
    SecurityPatch {
        vulnerability_id: Option<String>,
        severity: u8, // 1-10
    },
    /// Kernel update
    KernelUpdate {
        version: String,
        requires_reboot: bool,
    },
    /// Driver update
    DriverUpdate {
        device_name: String,
        version: String,
    },
    /// Application update
    ApplicationUpdate {
        app_name: String,
        version: String,
        size_mb: u32,
    },
    /// System configuration update
    ConfigUpdate {
        component: String,
        description: String,
    },
    /// Firmware update
    FirmwareUpdate {
        device_name: String,
        version: String,
        critical: bool,
    },
}

/// Update execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Pending scheduling
    Pending,
    /// Scheduled and waiting for execution
    Scheduled,
    /// Approved by user
    Approved,
    /// Currently executing
    Running,
    /// Completed successfully
    Completed,
    /// Failed and needs retry
    Failed,
    /// Cancelled by user
    Cancelled,
    /// Waiting for user approval
    WaitingApproval,
}

/// User notification information
#[derive(Debug, Clone)]
pub struct NotificationInfo {
    /// Notification ID
    pub id: u64,
    /// Update task ID
    pub update_id: u64,
    /// Notification type
    pub notification_type: NotificationType,
    /// Time to display (timestamp)
    pub display_time: u64,
    /// Message content
    pub message: String,
    /// Requires user action
    pub requires_action: bool,
}

/// Notification types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Update available
    UpdateAvailable,
    /// Update requires approval
    RequiresApproval,
    /// Update will start soon
    WillStart,
    /// Update completed
    Completed,
    /// Update failed
    Failed,
    /// Maintenance window starting
    MaintenanceStart,
}

/// System resource metrics
#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    /// Current CPU usage (0.0-1.0)
    pub cpu_usage: f32,
    /// Current memory usage (0.0-1.0)
    pub memory_usage: f32,
    /// Current disk I/O (MB/s)
    pub disk_io_mbps: f32,
    /// Network activity (MB/s)
    pub network_io_mbps: f32,
    /// Active user sessions
    pub active_sessions: u32,
    /// System load average
    pub load_average: f32,
}

/// Retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum retry attempts
    pub max_attempts: usize,
    /// Base delay between retries (in seconds)
    pub base_delay_secs: u64,
    /// Exponential backoff multiplier
    pub backoff_multiplier: f32,
    /// Maximum delay between retries (in seconds)
    pub max_delay_secs: u64,
}

/// Main update scheduler
pub struct UpdateScheduler {
    /// Configuration
    config: Arc<Mutex<ScheduleConfig>>,
    /// Pending update tasks
    pending_updates: Arc<Mutex<Vec<UpdateTask>>>,
    /// Scheduled updates
    scheduled_updates: Arc<Mutex<Vec<UpdateTask>>>,
    /// Running updates
    running_updates: Arc<Mutex<Vec<UpdateTask>>>,
    /// Usage pattern analysis
    usage_pattern: Arc<Mutex<UsagePattern>>,
    /// System metrics collector
    metrics_collector: Arc<Mutex<SystemMetricsCollector>>,
    /// Notification manager
    notification_manager: Arc<Mutex<NotificationManager>>,
    /// Retry configuration
    retry_config: Arc<RetryConfig>,
    /// Scheduler state
    is_running: Arc<AtomicBool>,
    /// Next update ID
    next_update_id: Arc<AtomicU64>,
    /// Timer for periodic scheduling
    scheduler_timer: Option<PeriodicTimer>,
    /// Security manager reference
    security_manager: Arc<Mutex<SecurityManager>>,
    /// Service manager reference
    service_manager: Arc<Mutex<ServiceManager>>,
}

/// System metrics collector
struct SystemMetricsCollector {
    /// Recent metrics history (last 24 hours)
    metrics_history: alloc::vec::Vec<SystemMetrics>,
    /// Collection timestamp
    last_collection: u64,
    /// Collection interval in seconds
    collection_interval: u64,
}

/// Notification manager
struct NotificationManager {
    /// Active notifications
    notifications: alloc::vec::Vec<NotificationInfo>,
    /// Next notification ID
    next_notification_id: Arc<AtomicU64>,
    /// Notification callback
    notification_callback: Option<Box<dyn Fn(&NotificationInfo) + Send + Sync>>,
}

/// Update scheduling result
#[derive(Debug, Clone)]
pub enum ScheduleResult {
    /// Successfully scheduled
    Scheduled(u64),
    /// Update was rejected
    Rejected(String),
    /// Update is queued
    Queued,
    /// Requires user approval
    RequiresApproval,
    /// Failed to schedule
    ScheduleFailed(String),
}

/// Execution result
#[derive(Debug, Clone)]
pub enum ExecutionResult {
    /// Successfully completed
    Success,
    /// Failed with error
    Failed(String),
    /// Needs retry
    RetryNeeded(String),
    /// Cancelled
    Cancelled,
}

/// Default retry configuration
impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRY_ATTEMPTS,
            base_delay_secs: 300, // 5 minutes
            backoff_multiplier: 2.0,
            max_delay_secs: 3600, // 1 hour
        }
    }
}

impl Default for UsagePattern {
    fn default() -> Self {
        let mut pattern = Self::default();
        // Default to business hours as peak
        for hour in 9..18 {
            pattern.peak_hours[hour as usize] = true;
        }
        // Default to night hours as idle
        for hour in 0..6 {
            pattern.idle_hours[hour as usize] = true;
        }
        pattern
    }
}

impl UpdateScheduler {
    /// Create a new update scheduler instance
    pub fn new(
        config: ScheduleConfig,
        security_manager: Arc<Mutex<SecurityManager>>,
        service_manager: Arc<Mutex<ServiceManager>>,
    ) -> Self {
        let metrics_collector = Arc::new(Mutex::new(SystemMetricsCollector::new()));
        let notification_manager = Arc::new(Mutex::new(NotificationManager::new()));

        Self {
            config: Arc::new(Mutex::new(config)),
            pending_updates: Arc::new(Mutex::new(Vec::new())),
            scheduled_updates: Arc::new(Mutex::new(Vec::new())),
            running_updates: Arc::new(Mutex::new(Vec::new())),
            usage_pattern: Arc::new(Mutex::new(UsagePattern::default())),
            metrics_collector,
            notification_manager,
            retry_config: Arc::new(RetryConfig::default()),
            is_running: Arc::new(AtomicBool::new(false)),
            next_update_id: Arc::new(AtomicU64::new(1)),
            scheduler_timer: None,
            security_manager,
            service_manager,
        }
    }

    /// Initialize and start the scheduler
    pub fn initialize(&mut self) -> Result<(), &'static str> {
        KernelLogger::log(LogLevel::Info, "Initializing update scheduler");

        // Start metrics collection
        self.metrics_collector.lock().start_collection();

        // Start usage pattern analysis
        self.analyze_usage_patterns();

        // Set up periodic scheduling timer
        let scheduler = Arc::new(Mutex::new(self.clone()));
        self.scheduler_timer = Some(PeriodicTimer::new(60, move || {
            let scheduler = scheduler.clone();
            scheduler.lock().process_pending_schedules();
        }));

        self.is_running.store(true, Ordering::Relaxed);

        KernelLogger::log(LogLevel::Info, "Update scheduler initialized successfully");
        Ok(())
    }

    /// Shutdown the scheduler
    pub fn shutdown(&mut self) -> Result<(), &'static str> {
        KernelLogger::log(LogLevel::Info, "Shutting down update scheduler");

        self.is_running.store(false, Ordering::Relaxed);
        
        if let Some(timer) = self.scheduler_timer.take() {
            timer.stop();
        }

        // Wait for running updates to complete
        let mut running = self.running_updates.lock();
        while !running.is_empty() {
            core::hint::spin_loop();
        }

        KernelLogger::log(LogLevel::Info, "Update scheduler shutdown complete");
        Ok(())
    }

    /// Schedule a new update
    pub fn schedule_update(&self, mut task: UpdateTask) -> ScheduleResult {
        // Validate update priority and security requirements
        if !self.validate_update_security(&task) {
            return ScheduleResult::Rejected("Security validation failed".to_string());
        }

        // Check system resources
        if !self.check_system_resources(&task) {
            return ScheduleResult::Rejected("Insufficient system resources".to_string());
        }

        // Assign unique ID
        let id = self.next_update_id.fetch_add(1, Ordering::Relaxed);
        task.id = id;

        // Calculate optimal execution time
        let optimal_time = self.calculate_optimal_execution_time(&task);
        task.scheduled_time = optimal_time;

        // Check if user approval is required
        if self.config.lock().require_approval && 
           self.requires_user_approval(&task) {
            task.status = UpdateStatus::WaitingApproval;
            self.send_notification(NotificationInfo {
                id: self.notification_manager.lock().get_next_id(),
                update_id: id,
                notification_type: NotificationType::RequiresApproval,
                display_time: crate::hal::timers::current_timestamp(),
                message: format!("Update {} requires approval", task.update_type_description()),
                requires_action: true,
            });
            return ScheduleResult::RequiresApproval;
        }

        // Add to appropriate queue
        let mut pending = self.pending_updates.lock();
        if pending.len() >= MAX_PENDING_UPDATES {
            return ScheduleResult::ScheduleFailed("Maximum pending updates reached".to_string());
        }

        pending.push(task);

        // If auto-scheduling is enabled, process immediately
        if self.config.lock().auto_scheduling {
            drop(pending);
            self.process_pending_schedules();
        }

        KernelLogger::log(LogLevel::Info, &format!("Update {} scheduled successfully", id));
        ScheduleResult::Scheduled(id)
    }

    /// Cancel a scheduled update
    pub fn cancel_update(&self, update_id: u64) -> Result<(), &'static str> {
        // Check running updates first
        {
            let mut running = self.running_updates.lock();
            if let Some(pos) = running.iter().position(|t| t.id == update_id) {
                let task = running.remove(pos);
                KernelLogger::log(LogLevel::Info, &format!("Cancelled running update {}", update_id));
                return Ok(());
            }
        }

        // Check scheduled updates
        {
            let mut scheduled = self.scheduled_updates.lock();
            if let Some(pos) = scheduled.iter().position(|t| t.id == update_id) {
                let task = scheduled.remove(pos);
                KernelLogger::log(LogLevel::Info, &format!("Cancelled scheduled update {}", update_id));
                return Ok(());
            }
        }

        // Check pending updates
        {
            let mut pending = self.pending_updates.lock();
            if let Some(pos) = pending.iter().position(|t| t.id == update_id) {
                let task = pending.remove(pos);
                KernelLogger::log(LogLevel::Info, &format!("Cancelled pending update {}", update_id));
                return Ok(());
            }
        }

        Err("Update not found")
    }

    /// Approve a pending update
    pub fn approve_update(&self, update_id: u64) -> Result<(), &'static str> {
        let mut pending = self.pending_updates.lock();
        
        if let Some(pos) = pending.iter().position(|t| t.id == update_id) {
            pending[pos].status = UpdateStatus::Approved;
            KernelLogger::log(LogLevel::Info, &format!("Approved update {}", update_id));
            Ok(())
        } else {
            Err("Update not found or not pending approval")
        }
    }

    /// Get scheduler status
    pub fn get_status(&self) -> SchedulerStatus {
        let pending = self.pending_updates.lock().len();
        let scheduled = self.scheduled_updates.lock().len();
        let running = self.running_updates.lock().len();
        let metrics = self.metrics_collector.lock().get_current_metrics();

        SchedulerStatus {
            is_running: self.is_running.load(Ordering::Relaxed),
            pending_updates: pending,
            scheduled_updates: scheduled,
            running_updates: running,
            system_metrics: metrics,
            next_scheduled_time: self.get_next_scheduled_time(),
        }
    }

    /// Process pending schedules and determine execution order
    fn process_pending_schedules(&self) {
        if !self.is_running.load(Ordering::Relaxed) {
            return;
        }

        // Get current system metrics
        let current_metrics = self.metrics_collector.lock().get_current_metrics();

        // Analyze system load and determine if we can start updates
        if !self.can_start_updates(&current_metrics) {
            return;
        }

        // Process pending updates
        let mut pending = self.pending_updates.lock();
        let mut to_schedule = Vec::new();

        // Separate approved and unapproved updates
        for (i, task) in pending.iter().enumerate() {
            if task.status == UpdateStatus::Pending || task.status == UpdateStatus::Approved {
                to_schedule.push(i);
            }
        }

        // Sort by priority
        to_schedule.sort_by_key(|&i| pending[i].priority);

        // Start updates based on priority and available resources
        let max_concurrent = self.config.lock().max_concurrent_updates;
        let mut running_count = self.running_updates.lock().len();
        let mut scheduled_count = 0;

        for idx in to_schedule {
            if running_count >= max_concurrent {
                break;
            }

            let mut task = pending.remove(idx);

            // Validate system resources for this specific update
            if self.can_execute_update(&task, &current_metrics) {
                task.status = UpdateStatus::Scheduled;
                
                // Execute immediately if within maintenance window
                if self.is_within_maintenance_window() {
                    task.status = UpdateStatus::Running;
                    running_count += 1;
                    self.start_update_execution(task);
                } else {
                    // Schedule for later
                    scheduled_count += 1;
                    self.scheduled_updates.lock().push(task);
                }
            }
        }
    }

    /// Start executing an update
    fn start_update_execution(&self, task: UpdateTask) {
        let scheduler_clone = Arc::new(Mutex::new(self.clone()));
        let task_clone = task.clone();

        // Execute update in background task
        crate::scheduler::spawn(async move {
            let result = Self::execute_update(&task_clone).await;
            
            // Handle completion
            let scheduler = scheduler_clone.lock();
            scheduler.handle_update_completion(task_clone.id, result);
        });
    }

    /// Execute an individual update
    async fn execute_update(task: &UpdateTask) -> ExecutionResult {
        KernelLogger::log(LogLevel::Info, &format!("Starting execution of update {}", task.id));

        match &task.update_type {
            UpdateType::SecurityPatch { vulnerability_id, severity } => {
                Self::execute_security_patch(vulnerability_id.as_deref(), *severity).await
            },
            UpdateType::KernelUpdate { version, requires_reboot } => {
                Self::execute_kernel_update(version, *requires_reboot).await
            },
            UpdateType::DriverUpdate { device_name, version } => {
                Self::execute_driver_update(device_name, version).await
            },
            UpdateType::ApplicationUpdate { app_name, version, size_mb } => {
                Self::execute_application_update(app_name, version, *size_mb).await
            },
            UpdateType::ConfigUpdate { component, description } => {
                Self::execute_config_update(component, description).await
            },
            UpdateType::FirmwareUpdate { device_name, version, critical } => {
                Self::execute_firmware_update(device_name, version, *critical).await
            },
        }
    }

    /// Execute security patch update
    async fn execute_security_patch(vulnerability_id: Option<&str>, severity: u8) -> ExecutionResult {
        KernelLogger::log(LogLevel::Info, &format!("Applying security patch for vulnerability {:?}", vulnerability_id));

        // Simulate security patch application
        for i in 0..severity.max(1) * 10 {
            crate::hal::timers::sleep_ms(100);
            if i % 10 == 0 {
                KernelLogger::log(LogLevel::Debug, &format!("Security patch progress: {}/{}", i, severity.max(1) * 10));
            }
        }

        ExecutionResult::Success
    }

    /// Execute kernel update
    async fn execute_kernel_update(version: &str, requires_reboot: bool) -> ExecutionResult {
        KernelLogger::log(LogLevel::Info, &format!("Updating kernel to version {}", version));

        // Simulate kernel update
        crate::hal::timers::sleep_ms(5000);

        if requires_reboot {
            KernelLogger::log(LogLevel::Warning, "Kernel update requires system reboot");
        }

        ExecutionResult::Success
    }

    /// Execute driver update
    async fn execute_driver_update(device_name: &str, version: &str) -> ExecutionResult {
        KernelLogger::log(LogLevel::Info, &format!("Updating driver {} to version {}", device_name, version));

        // Simulate driver update
        crate::hal::timers::sleep_ms(2000);

        ExecutionResult::Success
    }

    /// Execute application update
    async fn execute_application_update(app_name: &str, version: &str, size_mb: u32) -> ExecutionResult {
        KernelLogger::log(LogLevel::Info, &format!("Updating application {} to version {} ({} MB)", app_name, version, size_mb));

        // Simulate application update based on size
        let sleep_time = (size_mb as usize).min(10000); // Max 10 seconds
        crate::hal::timers::sleep_ms(sleep_time);

        ExecutionResult::Success
    }

    /// Execute configuration update
    async fn execute_config_update(component: &str, description: &str) -> ExecutionResult {
        KernelLogger::log(LogLevel::Info, &format!("Updating configuration for {}: {}", component, description));

        // Simulate configuration update
        crate::hal::timers::sleep_ms(500);

        ExecutionResult::Success
    }

    /// Execute firmware update
    async fn execute_firmware_update(device_name: &str, version: &str, critical: bool) -> ExecutionResult {
        KernelLogger::log(LogLevel::Info, &format!("Updating firmware for {} to version {} (critical: {})", device_name, version, critical));

        // Firmware updates are more critical and may require device reset
        crate::hal::timers::sleep_ms(3000);

        if critical {
            KernelLogger::log(LogLevel::Warning, "Critical firmware update - device may be temporarily unavailable");
        }

        ExecutionResult::Success
    }

    /// Handle update completion
    fn handle_update_completion(&self, update_id: u64, result: ExecutionResult) {
        // Remove from running updates
        {
            let mut running = self.running_updates.lock();
            if let Some(pos) = running.iter().position(|t| t.id == update_id) {
                running.remove(pos);
            }
        }

        match result {
            ExecutionResult::Success => {
                KernelLogger::log(LogLevel::Info, &format!("Update {} completed successfully", update_id));
                self.send_notification(NotificationInfo {
                    id: self.notification_manager.lock().get_next_id(),
                    update_id,
                    notification_type: NotificationType::Completed,
                    display_time: crate::hal::timers::current_timestamp(),
                    message: format!("Update {} completed successfully", update_id),
                    requires_action: false,
                });
            },
            ExecutionResult::Failed(error) => {
                KernelLogger::log(LogLevel::Error, &format!("Update {} failed: {}", update_id, error));
                self.handle_update_failure(update_id, &error);
            },
            ExecutionResult::RetryNeeded(error) => {
                KernelLogger::log(LogLevel::Warning, &format!("Update {} needs retry: {}", update_id, error));
                self.schedule_retry(update_id, &error);
            },
            ExecutionResult::Cancelled => {
                KernelLogger::log(LogLevel::Info, &format!("Update {} was cancelled", update_id));
            },
        }

        // Process more pending updates
        self.process_pending_schedules();
    }

    /// Handle update failure
    fn handle_update_failure(&self, update_id: u64, error: &str) {
        // Find the update task
        let mut task_to_retry = None;
        
        {
            let mut pending = self.pending_updates.lock();
            if let Some(pos) = pending.iter().position(|t| t.id == update_id) {
                task_to_retry = Some(pending.remove(pos));
            }
        }

        if let Some(mut task) = task_to_retry {
            task.retry_count += 1;
            task.status = UpdateStatus::Failed;

            // Check if we should retry
            if task.retry_count < self.retry_config.max_attempts {
                self.schedule_retry(update_id, error);
            } else {
                KernelLogger::log(LogLevel::Error, &format!("Update {} failed after {} attempts", update_id, task.retry_count));
                self.send_notification(NotificationInfo {
                    id: self.notification_manager.lock().get_next_id(),
                    update_id,
                    notification_type: NotificationType::Failed,
                    display_time: crate::hal::timers::current_timestamp(),
                    message: format!("Update {} failed after {} attempts: {}", update_id, task.retry_count, error),
                    requires_action: true,
                });
            }
        }
    }

    /// Schedule retry for a failed update
    fn schedule_retry(&self, update_id: u64, error: &str) {
        // Calculate retry delay
        let task_index = self.find_update_task(update_id);
        if let Some((mut task, queue_type)) = task_index {
            task.status = UpdateStatus::Pending;
            
            // Calculate exponential backoff delay
            let delay = self.calculate_retry_delay(task.retry_count);
            
            KernelLogger::log(LogLevel::Info, &format!("Scheduling retry for update {} in {} seconds", update_id, delay));
            
            // Schedule retry (simplified - in real implementation would use timer)
            self.pending_updates.lock().push(task);
        }
    }

    /// Calculate retry delay using exponential backoff
    fn calculate_retry_delay(&self, retry_count: usize) -> u64 {
        let base_delay = self.retry_config.base_delay_secs;
        let multiplier = self.retry_config.backoff_multiplier;
        let max_delay = self.retry_config.max_delay_secs;
        
        let delay = (base_delay as f32 * multiplier.powi(retry_count as i32 - 1)) as u64;
        delay.min(max_delay)
    }

    /// Find update task by ID
    fn find_update_task(&self, update_id: u64) -> Option<(UpdateTask, &'static str)> {
        // Check all queues
        {
            let pending = self.pending_updates.lock();
            if let Some(pos) = pending.iter().position(|t| t.id == update_id) {
                return Some((pending[pos].clone(), "pending"));
            }
        }

        {
            let scheduled = self.scheduled_updates.lock();
            if let Some(pos) = scheduled.iter().position(|t| t.id == update_id) {
                return Some((scheduled[pos].clone(), "scheduled"));
            }
        }

        {
            let running = self.running_updates.lock();
            if let Some(pos) = running.iter().position(|t| t.id == update_id) {
                return Some((running[pos].clone(), "running"));
            }
        }

        None
    }

    /// Calculate optimal execution time based on usage patterns
    fn calculate_optimal_execution_time(&self, task: &UpdateTask) -> Option<u64> {
        let usage_pattern = self.usage_pattern.lock();
        let current_time = crate::hal::timers::current_timestamp();
        
        // Priority-based scheduling
        match task.priority {
            UpdatePriority::Critical => {
                // Execute critical updates immediately if possible
                return Some(current_time);
            },
            UpdatePriority::Security => {
                // Schedule within next 24 hours during idle periods
                if let Some(idle_hour) = self.find_next_idle_hour() {
                    return Some(self.calculate_time_for_hour(idle_hour));
                }
            },
            _ => {
                // For lower priorities, find the best maintenance window
                if let Some(window_time) = self.find_next_maintenance_window() {
                    return Some(window_time);
                }
            }
        }

        None
    }

    /// Find the next idle hour based on usage patterns
    fn find_next_idle_hour(&self) -> Option<u8> {
        let usage_pattern = self.usage_pattern.lock();
        let current_hour = crate::hal::timers::current_hour();
        
        // Look for idle hours in the next 24 hours
        for offset in 0..24 {
            let check_hour = (current_hour + offset) % 24;
            if usage_pattern.idle_hours[check_hour as usize] {
                return Some(check_hour);
            }
        }

        None
    }

    /// Find the next maintenance window
    fn find_next_maintenance_window(&self) -> Option<u64> {
        let config = self.config.lock();
        let window = &config.maintenance_window;
        let current_time = crate::hal::timers::current_timestamp();
        
        // Check if current time is within maintenance window
        if self.is_within_maintenance_window() {
            return Some(current_time);
        }

        // Calculate next maintenance window (simplified)
        // In real implementation, this would consider the day of week and timezone
        Some(current_time + 3600) // Next hour as fallback
    }

    /// Check if current time is within maintenance window
    fn is_within_maintenance_window(&self) -> bool {
        let config = self.config.lock();
        let window = &config.maintenance_window;
        let current_hour = crate::hal::timers::current_hour();
        let current_day = crate::hal::timers::current_day_of_week();
        
        // Check if current day is allowed
        if (window.allowed_days & (1 << current_day)) == 0 {
            return false;
        }

        // Check if current hour is within the window
        current_hour >= window.start_hour && 
        current_hour < window.start_hour + window.duration_hours
    }

    /// Calculate timestamp for specific hour
    fn calculate_time_for_hour(&self, hour: u8) -> u64 {
        let current_time = crate::hal::timers::current_timestamp();
        let current_hour = crate::hal::timers::current_hour();
        
        let hours_ahead = if hour >= current_hour {
            hour - current_hour
        } else {
            24 - current_hour + hour
        };

        current_time + (hours_ahead as u64) * 3600
    }

    /// Validate update security requirements
    fn validate_update_security(&self, task: &UpdateTask) -> bool {
        let security_manager = self.security_manager.lock();
        
        // Check update signature if required
        match task.update_type {
            UpdateType::SecurityPatch { .. } => {
                // Security patches require additional validation
                security_manager.verify_security_update(task.id)
            },
            UpdateType::FirmwareUpdate { critical, .. } => {
                // Critical firmware updates require strong validation
                if critical {
                    security_manager.verify_firmware_update(task.id)
                } else {
                    true
                }
            },
            _ => {
                // Regular updates require basic validation
                security_manager.verify_update_signature(task.id)
            },
        }
    }

    /// Check if system has sufficient resources for update
    fn check_system_resources(&self, task: &UpdateTask) -> bool {
        let metrics = self.metrics_collector.lock().get_current_metrics();
        self.can_execute_update(task, &metrics)
    }

    /// Check if we can execute a specific update given current system state
    fn can_execute_update(&self, task: &UpdateTask, metrics: &SystemMetrics) -> bool {
        // Check resource usage
        if metrics.cpu_usage > 0.8 {
            return false;
        }
        
        if metrics.memory_usage > 0.9 {
            return false;
        }

        // Check for critical updates during high load
        if task.priority == UpdatePriority::Critical && metrics.load_average > 2.0 {
            return false;
        }

        true
    }

    /// Check if we can start new updates
    fn can_start_updates(&self, metrics: &SystemMetrics) -> bool {
        // Don't start updates during peak usage
        if metrics.cpu_usage > 0.7 || metrics.memory_usage > 0.8 {
            return false;
        }

        // Check active user sessions
        if metrics.active_sessions > 10 {
            return false;
        }

        true
    }

    /// Determine if update requires user approval
    fn requires_user_approval(&self, task: &UpdateTask) -> bool {
        match task.priority {
            UpdatePriority::Critical | UpdatePriority::Security => false, // Auto-approve high priority
            UpdatePriority::Important => {
                // Approve if scheduled during maintenance window
                self.is_within_maintenance_window()
            },
            _ => true, // Require approval for lower priority updates
        }
    }

    /// Analyze system usage patterns
    fn analyze_usage_patterns(&self) {
        let mut usage_pattern = self.usage_pattern.lock();
        let metrics = self.metrics_collector.lock();
        
        // Calculate peak and idle hours based on historical data
        for hour in 0..24 {
            let avg_cpu = metrics.get_average_cpu_for_hour(hour);
            let avg_memory = metrics.get_average_memory_for_hour(hour);
            
            // Define thresholds for peak vs idle hours
            if avg_cpu > 0.6 || avg_memory > 0.7 {
                usage_pattern.peak_hours[hour] = true;
                usage_pattern.idle_hours[hour] = false;
            } else if avg_cpu < 0.3 && avg_memory < 0.5 {
                usage_pattern.peak_hours[hour] = false;
                usage_pattern.idle_hours[hour] = true;
            }
        }
    }

    /// Send notification to user
    fn send_notification(&self, notification: NotificationInfo) {
        let mut notification_manager = self.notification_manager.lock();
        notification_manager.notifications.push(notification.clone());
        
        // Execute notification callback if set
        if let Some(ref callback) = notification_manager.notification_callback {
            callback(&notification);
        }
    }

    /// Set notification callback
    pub fn set_notification_callback<F>(&self, callback: F)
    where
        F: Fn(&NotificationInfo) + Send + Sync + 'static,
    {
        let mut notification_manager = self.notification_manager.lock();
        notification_manager.notification_callback = Some(Box::new(callback));
    }

    /// Get next scheduled update time
    fn get_next_scheduled_time(&self) -> Option<u64> {
        let scheduled = self.scheduled_updates.lock();
        scheduled.iter().filter_map(|t| t.scheduled_time).min()
    }

    /// Get current queue status
    pub fn get_queue_status(&self) -> QueueStatus {
        let pending = self.pending_updates.lock().len();
        let scheduled = self.scheduled_updates.lock().len();
        let running = self.running_updates.lock().len();

        QueueStatus {
            pending_count: pending,
            scheduled_count: scheduled,
            running_count: running,
            total_count: pending + scheduled + running,
        }
    }

    /// Update configuration
    pub fn update_config(&self, new_config: ScheduleConfig) -> Result<(), &'static str> {
        *self.config.lock() = new_config;
        KernelLogger::log(LogLevel::Info, "Update scheduler configuration updated");
        Ok(())
    }

    /// Get update history (simplified)
    pub fn get_update_history(&self) -> alloc::vec::Vec<UpdateTask> {
        // In real implementation, this would query a persistent storage
        alloc::vec::Vec::new()
    }

    /// Force immediate execution of pending updates (emergency maintenance)
    pub fn force_maintenance_mode(&self) -> Result<(), &'static str> {
        if !self.is_running.load(Ordering::Relaxed) {
            return Err("Scheduler is not running");
        }

        // Move all pending and scheduled updates to immediate execution
        let mut pending = self.pending_updates.lock();
        let mut scheduled = self.scheduled_updates.lock();

        // Combine all pending and scheduled updates
        let mut all_updates = Vec::new();
        all_updates.append(&mut *pending);
        all_updates.append(&mut *scheduled);

        // Clear queues
        pending.clear();
        scheduled.clear();

        // Execute immediately (limited by max_concurrent_updates)
        let max_concurrent = self.config.lock().max_concurrent_updates;
        let mut running_count = 0;

        for mut task in all_updates {
            if running_count >= max_concurrent {
                break;
            }

            task.status = UpdateStatus::Running;
            running_count += 1;
            self.start_update_execution(task);
        }

        KernelLogger::log(LogLevel::Warning, "Emergency maintenance mode activated");
        Ok(())
    }
}

/// SystemMetricsCollector implementation
impl SystemMetricsCollector {
    fn new() -> Self {
        Self {
            metrics_history: alloc::vec::Vec::new(),
            last_collection: 0,
            collection_interval: 300, // 5 minutes
        }
    }

    fn start_collection(&mut self) {
        self.last_collection = crate::hal::timers::current_timestamp();
        // In real implementation, would start background collection task
    }

    fn get_current_metrics(&self) -> SystemMetrics {
        // In real implementation, would collect real-time metrics
        SystemMetrics {
            cpu_usage: 0.3,
            memory_usage: 0.5,
            disk_io_mbps: 10.0,
            network_io_mbps: 5.0,
            active_sessions: 2,
            load_average: 0.8,
        }
    }

    fn get_average_cpu_for_hour(&self, _hour: u8) -> f32 {
        // In real implementation, would calculate from metrics_history
        0.4
    }

    fn get_average_memory_for_hour(&self, _hour: u8) -> f32 {
        // In real implementation, would calculate from metrics_history
        0.6
    }
}

/// NotificationManager implementation
impl NotificationManager {
    fn new() -> Self {
        Self {
            notifications: alloc::vec::Vec::new(),
            next_notification_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn get_next_id(&self) -> u64 {
        self.next_notification_id.fetch_add(1, Ordering::Relaxed)
    }
}

/// Additional trait implementations
impl UpdateTask {
    /// Get human-readable description of update type
    fn update_type_description(&self) -> String {
        match &self.update_type {
            UpdateType::SecurityPatch { vulnerability_id, .. } => {
                format!("Security Patch ({})", vulnerability_id.as_deref().unwrap_or("Unknown"))
            },
            UpdateType::KernelUpdate { version, .. } => {
                format!("Kernel Update v{}", version)
            },
            UpdateType::DriverUpdate { device_name, version } => {
                format!("Driver {} Update v{}", device_name, version)
            },
            UpdateType::ApplicationUpdate { app_name, version, .. } => {
                format!("Application {} Update v{}", app_name, version)
            },
            UpdateType::ConfigUpdate { component, .. } => {
                format!("Configuration Update ({})", component)
            },
            UpdateType::FirmwareUpdate { device_name, version, .. } => {
                format!("Firmware {} Update v{}", device_name, version)
            },
        }
    }
}

/// Status structures
#[derive(Debug, Clone)]
pub struct SchedulerStatus {
    pub is_running: bool,
    pub pending_updates: usize,
    pub scheduled_updates: usize,
    pub running_updates: usize,
    pub system_metrics: SystemMetrics,
    pub next_scheduled_time: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct QueueStatus {
    pub pending_count: usize,
    pub scheduled_count: usize,
    pub running_count: usize,
    pub total_count: usize,
}

/// Clone implementation for UpdateScheduler (simplified)
impl Clone for UpdateScheduler {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            pending_updates: self.pending_updates.clone(),
            scheduled_updates: self.scheduled_updates.clone(),
            running_updates: self.running_updates.clone(),
            usage_pattern: self.usage_pattern.clone(),
            metrics_collector: self.metrics_collector.clone(),
            notification_manager: self.notification_manager.clone(),
            retry_config: self.retry_config.clone(),
            is_running: self.is_running.clone(),
            next_update_id: self.next_update_id.clone(),
            scheduler_timer: None, // Timer cannot be cloned
            security_manager: self.security_manager.clone(),
            service_manager: self.service_manager.clone(),
        }
    }
}

/// Mutex wrapper implementation for UpdateScheduler
impl core::ops::Deref for UpdateScheduler {
    type Target = Self;

    fn deref(&self) -> &Self {
        self
    }
}

// Required trait implementations for using UpdateScheduler in collections
unsafe impl Send for UpdateScheduler {}
unsafe impl Sync for UpdateScheduler {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_priority_ordering() {
        assert!(UpdatePriority::Critical < UpdatePriority::Security);
        assert!(UpdatePriority::Security < UpdatePriority::Important);
        assert!(UpdatePriority::Important < UpdatePriority::Optional);
        assert!(UpdatePriority::Optional < UpdatePriority::Low);
    }

    #[test]
    fn test_maintenance_window_validation() {
        let window = MaintenanceWindow {
            start_hour: 2,
            duration_hours: 4,
            allowed_days: 0b0111111, // Monday to Sunday
            timezone_offset_minutes: 0,
        };

        // Test window boundaries
        assert!(window.start_hour + window.duration_hours <= 24);
    }

    #[test]
    fn test_retry_delay_calculation() {
        let retry_config = RetryConfig::default();
        
        // Test exponential backoff
        let delay1 = (retry_config.base_delay_secs as f32 * retry_config.backoff_multiplier.powi(0)) as u64;
        let delay2 = (retry_config.base_delay_secs as f32 * retry_config.backoff_multiplier.powi(1)) as u64;
        let delay3 = (retry_config.base_delay_secs as f32 * retry_config.backoff_multiplier.powi(2)) as u64;
        
        assert!(delay1 < delay2);
        assert!(delay2 < delay3);
    }
}
