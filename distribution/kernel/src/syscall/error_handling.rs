//! MultiOS System Call Error Handling and Recovery Framework
//! 
//! This module provides comprehensive error handling, recovery mechanisms, and
//! fault tolerance for the system call interface. It includes error classification,
//! recovery strategies, graceful degradation, and comprehensive error reporting.

use crate::log::{info, warn, error, debug};
use crate::arch::interrupts::*;
use crate::syscall_numbers;
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use spin::Mutex;

type ErrorResult<T> = Result<T, SyscallError>;

/// Comprehensive system call error handling and recovery manager
pub struct SyscallErrorManager {
    /// Error classification system
    error_classifier: ErrorClassifier,
    /// Recovery strategies
    recovery_strategies: RecoveryStrategies,
    /// Error statistics
    error_statistics: ErrorStatistics,
    /// Fault tolerance mechanisms
    fault_tolerance: FaultTolerance,
    /// Error reporting system
    error_reporter: ErrorReporter,
}

/// Error classification system
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    /// Error categories
    categories: ErrorCategories,
    /// Error severity levels
    severity_levels: SeverityLevels,
}

impl ErrorClassifier {
    pub fn new() -> Self {
        Self {
            categories: ErrorCategories::new(),
            severity_levels: SeverityLevels::new(),
        }
    }

    /// Classify and analyze system call error
    pub fn classify_error(&self, error: SyscallError, context: &ErrorContext) -> ClassifiedError {
        let category = self.categorize_error(error);
        let severity = self.determine_severity(error, context);
        let recovery_strategy = self.suggest_recovery_strategy(error, category, severity);
        let escalation_policy = self.determine_escalation_policy(severity, context);
        
        ClassifiedError {
            original_error: error,
            category,
            severity,
            recovery_strategy,
            escalation_policy,
            error_code: error as usize,
            description: self.get_error_description(error),
            impact_assessment: self.assess_impact(error, context),
            recommended_actions: self.get_recommended_actions(error, category),
        }
    }

    /// Categorize error by type
    fn categorize_error(&self, error: SyscallError) -> ErrorCategory {
        match error {
            // Validation errors
            SyscallError::InvalidArgument | 
            SyscallError::InvalidPointer | 
            SyscallError::ValueOutOfRange |
            SyscallError::BufferTooSmall |
            SyscallError::InvalidFileDescriptor => {
                ErrorCategory::ValidationError
            }
            
            // Permission errors
            SyscallError::PermissionDenied | 
            SyscallError::AccessDenied | 
            SyscallError::SecurityViolation |
            SyscallError::CapabilityNotHeld => {
                ErrorCategory::PermissionError
            }
            
            // Resource errors
            SyscallError::ResourceUnavailable | 
            SyscallError::TooManyOpenFiles | 
            SyscallError::NoSpaceLeft |
            SyscallError::DiskFull |
            SyscallError::MemoryAllocationFailed |
            SyscallError::TooManyProcesses |
            SyscallError::TooManyThreads => {
                ErrorCategory::ResourceError
            }
            
            // System errors
            SyscallError::ProcessNotFound | 
            SyscallError::ThreadNotFound | 
            SyscallError::FileNotFound |
            SyscallError::SystemCallNotImplemented |
            SyscallError::OperationNotSupported => {
                ErrorCategory::SystemError
            }
            
            // State errors
            SyscallError::StateCorrupted | 
            SyscallError::InvalidFileSystemState |
            SyscallError::Deadlock |
            SyscallError::ResourceLeaked => {
                ErrorCategory::StateError
            }
            
            // Internal errors
            SyscallError::InternalError => {
                ErrorCategory::InternalError
            }
            
            // All others are general errors
            _ => ErrorCategory::GeneralError,
        }
    }

    /// Determine error severity
    fn determine_severity(&self, error: SyscallError, context: &ErrorContext) -> ErrorSeverity {
        let base_severity = self.severity_levels.get_base_severity(error);
        
        // Adjust severity based on context
        let mut adjusted_severity = base_severity;
        
        if context.is_critical_system_call {
            adjusted_severity = adjusted_severity.escalate();
        }
        
        if context.failure_count > 5 {
            adjusted_severity = adjusted_severity.escalate();
        }
        
        if context.is_high_frequency_operation {
            adjusted_severity = adjusted_severity.escalate();
        }
        
        adjusted_severity
    }

    /// Suggest recovery strategy
    fn suggest_recovery_strategy(&self, error: SyscallError, category: ErrorCategory, severity: ErrorSeverity) -> RecoveryStrategy {
        match category {
            ErrorCategory::ValidationError => {
                if severity == ErrorSeverity::Critical {
                    RecoveryStrategy::FailFast
                } else {
                    RecoveryStrategy::RetryWithValidation
                }
            }
            
            ErrorCategory::PermissionError => {
                RecoveryStrategy::EscalateToAdmin
            }
            
            ErrorCategory::ResourceError => {
                match error {
                    SyscallError::MemoryAllocationFailed => RecoveryStrategy::FreeResourcesAndRetry,
                    SyscallError::TooManyOpenFiles => RecoveryStrategy::CloseUnusedResources,
                    SyscallError::DiskFull | SyscallError::NoSpaceLeft => RecoveryStrategy::CleanupAndEscalate,
                    _ => RecoveryStrategy::WaitAndRetry,
                }
            }
            
            ErrorCategory::SystemError => {
                match error {
                    SyscallError::SystemCallNotImplemented => RecoveryStrategy::FallbackToCompatibility,
                    SyscallError::OperationNotSupported => RecoveryStrategy::DisableFeature,
                    _ => RecoveryStrategy::EscalateToAdmin,
                }
            }
            
            ErrorCategory::StateError => {
                RecoveryStrategy::StateRecovery
            }
            
            ErrorCategory::InternalError => {
                RecoveryStrategy::RestartComponent
            }
            
            ErrorCategory::GeneralError => {
                RecoveryStrategy::Default
            }
        }
    }

    /// Determine escalation policy
    fn determine_escalation_policy(&self, severity: ErrorSeverity, context: &ErrorContext) -> EscalationPolicy {
        match severity {
            ErrorSeverity::Info => EscalationPolicy::LogOnly,
            ErrorSeverity::Warning => EscalationPolicy::LogAndMonitor,
            ErrorSeverity::Error => EscalationPolicy::LogMonitorAndAlert,
            ErrorSeverity::Critical => EscalationPolicy::LogMonitorAlertAndEscalate,
            ErrorSeverity::Fatal => EscalationPolicy::EmergencyShutdown,
        }
    }

    /// Get error description
    fn get_error_description(&self, error: SyscallError) -> &'static str {
        match error {
            SyscallError::Success => "Operation completed successfully",
            SyscallError::InvalidArgument => "Invalid argument provided to system call",
            SyscallError::PermissionDenied => "Permission denied for operation",
            SyscallError::ResourceUnavailable => "Required resource is unavailable",
            SyscallError::ProcessNotFound => "Specified process not found",
            SyscallError::ThreadNotFound => "Specified thread not found",
            SyscallError::MemoryAllocationFailed => "Failed to allocate memory",
            SyscallError::InvalidPointer => "Invalid pointer provided",
            SyscallError::AddressSpaceViolation => "Address space violation detected",
            SyscallError::FileNotFound => "File not found",
            SyscallError::PermissionNotGranted => "Permission not granted",
            SyscallError::TooManyOpenFiles => "Too many open files",
            SyscallError::IOResourceBusy => "I/O resource is busy",
            SyscallError::OperationNotSupported => "Operation not supported",
            SyscallError::Timeout => "Operation timed out",
            SyscallError::Interrupted => "Operation was interrupted",
            SyscallError::Deadlock => "Deadlock detected",
            SyscallError::ValueOutOfRange => "Value is out of valid range",
            SyscallError::BufferTooSmall => "Provided buffer is too small",
            SyscallError::NotEnoughSpace => "Not enough space available",
            SyscallError::InvalidFileDescriptor => "Invalid file descriptor",
            SyscallError::IsDirectory => "Operation attempted on directory",
            SyscallError::NotDirectory => "Expected directory",
            SyscallError::FileExists => "File already exists",
            SyscallError::DirectoryNotEmpty => "Directory is not empty",
            SyscallError::FileTableOverflow => "File table overflow",
            SyscallError::InvalidSeek => "Invalid seek operation",
            SyscallError::CrossDeviceLink => "Cross-device link attempted",
            SyscallError::ReadOnlyFileSystem => "File system is read-only",
            SyscallError::TooManyLinks => "Too many links",
            SyscallError::NameTooLong => "Name is too long",
            SyscallError::NoSpaceLeft => "No space left on device",
            SyscallError::DiskFull => "Disk is full",
            SyscallError::BadFileDescriptor => "Bad file descriptor",
            SyscallError::BadAddress => "Bad address",
            SyscallError::FileBusy => "File is busy",
            SyscallError::InvalidFileSystemState => "Invalid file system state",
            SyscallError::SystemCallNotImplemented => "System call not implemented",
            SyscallError::SecurityViolation => "Security policy violation",
            SyscallError::QuotaExceeded => "Resource quota exceeded",
            SyscallError::TooManyProcesses => "Too many processes",
            SyscallError::TooManyThreads => "Too many threads",
            SyscallError::InvalidMemoryRegion => "Invalid memory region",
            SyscallError::ProtectionFault => "Memory protection fault",
            SyscallError::CapabilityNotHeld => "Required capability not held",
            SyscallError::AccessDenied => "Access denied",
            SyscallError::InvalidOperation => "Invalid operation",
            SyscallError::StateCorrupted => "System state is corrupted",
            SyscallError::ResourceLeaked => "Resource leak detected",
            SyscallError::InternalError => "Internal system error",
        }
    }

    /// Assess error impact
    fn assess_impact(&self, error: SyscallError, context: &ErrorContext) -> ErrorImpact {
        let impact_level = match error {
            SyscallError::InternalError | SyscallError::StateCorrupted | SyscallError::Fatal => {
                ImpactLevel::SystemWide
            }
            SyscallError::MemoryAllocationFailed | SyscallError::SecurityViolation => {
                ImpactLevel::ProcessWide
            }
            _ => ImpactLevel::OperationSpecific,
        };
        
        ErrorImpact {
            level: impact_level,
            affected_operations: self.get_affected_operations(error),
            recovery_time_estimate: self.estimate_recovery_time(error, context),
            user_impact: self.assess_user_impact(error, context),
        }
    }

    /// Get affected operations
    fn get_affected_operations(&self, error: SyscallError) -> Vec<usize> {
        // Return list of syscall numbers that might be affected by this error
        match error {
            SyscallError::TooManyOpenFiles => {
                vec![
                    syscall_numbers::FILE_OPEN,
                    syscall_numbers::DEVICE_OPEN,
                ]
            }
            SyscallError::MemoryAllocationFailed => {
                vec![
                    syscall_numbers::VIRTUAL_ALLOC,
                    syscall_numbers::PHYSICAL_ALLOC,
                    syscall_numbers::PROCESS_CREATE,
                    syscall_numbers::THREAD_CREATE,
                ]
            }
            _ => Vec::new(),
        }
    }

    /// Estimate recovery time
    fn estimate_recovery_time(&self, error: SyscallError, context: &ErrorContext) -> u64 {
        match error {
            SyscallError::ResourceUnavailable => 1000,      // 1 second
            SyscallError::Timeout => 5000,                  // 5 seconds
            SyscallError::TooManyOpenFiles => 100,          // 100ms
            SyscallError::MemoryAllocationFailed => 10000,  // 10 seconds
            SyscallError::StateCorrupted => 60000,          // 1 minute
            SyscallError::InternalError => 30000,           // 30 seconds
            _ => 1000, // Default 1 second
        }
    }

    /// Assess user impact
    fn assess_user_impact(&self, error: SyscallError, context: &ErrorContext) -> UserImpact {
        if context.is_user_space_call {
            match error {
                SyscallError::PermissionDenied | SyscallError::AccessDenied => {
                    UserImpact::AccessRestriction
                }
                SyscallError::FileNotFound | SyscallError::ProcessNotFound => {
                    UserImpact::ResourceNotFound
                }
                SyscallError::TooManyOpenFiles | SyscallError::MemoryAllocationFailed => {
                    UserImpact::ResourceExhaustion
                }
                _ => UserImpact::OperationFailure,
            }
        } else {
            UserImpact::Minimal
        }
    }

    /// Get recommended actions
    fn get_recommended_actions(&self, error: SyscallError, category: ErrorCategory) -> Vec<RecommendedAction> {
        let mut actions = Vec::new();
        
        match error {
            SyscallError::InvalidArgument => {
                actions.push(RecommendedAction::CheckParameters("Review system call parameters".to_string()));
                actions.push(RecommendedAction::ValidateInput("Validate input values".to_string()));
            }
            
            SyscallError::PermissionDenied => {
                actions.push(RecommendedAction::CheckPermissions("Verify process permissions".to_string()));
                actions.push(RecommendedAction::ReviewSecurityPolicy("Review security policies".to_string()));
            }
            
            SyscallError::TooManyOpenFiles => {
                actions.push(RecommendedAction::CloseResources("Close unused file descriptors".to_string()));
                actions.push(RecommendedAction::IncreaseLimit("Increase file descriptor limit".to_string()));
            }
            
            SyscallError::MemoryAllocationFailed => {
                actions.push(RecommendedAction::FreeMemory("Free unused memory".to_string()));
                actions.push(RecommendedAction::OptimizeUsage("Optimize memory usage".to_string()));
            }
            
            SyscallError::InternalError => {
                actions.push(RecommendedAction::RestartComponent("Restart affected component".to_string()));
                actions.push(RecommendedAction::ContactSupport("Contact system administrator".to_string()));
            }
            
            _ => {
                actions.push(RecommendedAction::LogError("Log error details for analysis".to_string()));
                actions.push(RecommendedAction::MonitorSystem("Monitor system for related issues".to_string()));
            }
        }
        
        actions
    }
}

/// Error categories for classification
#[derive(Debug, Clone)]
pub struct ErrorCategories {
    validation_error_count: AtomicU64,
    permission_error_count: AtomicU64,
    resource_error_count: AtomicU64,
    system_error_count: AtomicU64,
    state_error_count: AtomicU64,
    internal_error_count: AtomicU64,
    general_error_count: AtomicU64,
}

impl ErrorCategories {
    pub fn new() -> Self {
        Self {
            validation_error_count: AtomicU64::new(0),
            permission_error_count: AtomicU64::new(0),
            resource_error_count: AtomicU64::new(0),
            system_error_count: AtomicU64::new(0),
            state_error_count: AtomicU64::new(0),
            internal_error_count: AtomicU64::new(0),
            general_error_count: AtomicU64::new(0),
        }
    }

    pub fn increment(&self, category: ErrorCategory) {
        match category {
            ErrorCategory::ValidationError => self.validation_error_count.fetch_add(1, Ordering::Relaxed),
            ErrorCategory::PermissionError => self.permission_error_count.fetch_add(1, Ordering::Relaxed),
            ErrorCategory::ResourceError => self.resource_error_count.fetch_add(1, Ordering::Relaxed),
            ErrorCategory::SystemError => self.system_error_count.fetch_add(1, Ordering::Relaxed),
            ErrorCategory::StateError => self.state_error_count.fetch_add(1, Ordering::Relaxed),
            ErrorCategory::InternalError => self.internal_error_count.fetch_add(1, Ordering::Relaxed),
            ErrorCategory::GeneralError => self.general_error_count.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
    Fatal,
}

impl ErrorSeverity {
    pub fn escalate(&self) -> Self {
        match self {
            Self::Info => Self::Warning,
            Self::Warning => Self::Error,
            Self::Error => Self::Critical,
            Self::Critical | Self::Fatal => Self::Fatal,
        }
    }
}

/// Severity level definitions
#[derive(Debug)]
pub struct SeverityLevels {
    /// Base severity mapping for errors
    error_severities: Vec<(SyscallError, ErrorSeverity)>,
}

impl SeverityLevels {
    pub fn new() -> Self {
        let error_severities = vec![
            // Info level
            (SyscallError::Success, ErrorSeverity::Info),
            
            // Warning level
            (SyscallError::Timeout, ErrorSeverity::Warning),
            (SyscallError::Interrupted, ErrorSeverity::Warning),
            (SyscallError::ValueOutOfRange, ErrorSeverity::Warning),
            
            // Error level
            (SyscallError::InvalidArgument, ErrorSeverity::Error),
            (SyscallError::InvalidPointer, ErrorSeverity::Error),
            (SyscallError::FileNotFound, ErrorSeverity::Error),
            (SyscallError::PermissionDenied, ErrorSeverity::Error),
            (SyscallError::ResourceUnavailable, ErrorSeverity::Error),
            
            // Critical level
            (SyscallError::MemoryAllocationFailed, ErrorSeverity::Critical),
            (SyscallError::AddressSpaceViolation, ErrorSeverity::Critical),
            (SyscallError::SecurityViolation, ErrorSeverity::Critical),
            (SyscallError::SystemCallNotImplemented, ErrorSeverity::Critical),
            
            // Fatal level
            (SyscallError::InternalError, ErrorSeverity::Fatal),
            (SyscallError::StateCorrupted, ErrorSeverity::Fatal),
            (SyscallError::ResourceLeaked, ErrorSeverity::Fatal),
        ];
        
        Self { error_severities }
    }

    pub fn get_base_severity(&self, error: SyscallError) -> ErrorSeverity {
        for (err, severity) in &self.error_severities {
            if *err == error {
                return *severity;
            }
        }
        ErrorSeverity::Error // Default
    }
}

/// Recovery strategies
#[derive(Debug, Clone)]
pub enum RecoveryStrategy {
    /// Retry the operation with same parameters
    Retry,
    /// Retry with modified parameters
    RetryWithParameters(Vec<usize>),
    /// Retry with validation improvements
    RetryWithValidation,
    /// Wait for resource availability
    WaitAndRetry,
    /// Free resources and retry
    FreeResourcesAndRetry,
    /// Close unused resources
    CloseUnusedResources,
    /// Cleanup and escalate
    CleanupAndEscalate,
    /// Fail immediately without retry
    FailFast,
    /// Use compatibility layer
    FallbackToCompatibility,
    /// Disable affected feature
    DisableFeature,
    /// Recover system state
    StateRecovery,
    /// Restart affected component
    RestartComponent,
    /// Escalate to administrator
    EscalateToAdmin,
    /// Default recovery action
    Default,
}

/// Escalation policies
#[derive(Debug, Clone)]
pub enum EscalationPolicy {
    /// Only log the error
    LogOnly,
    /// Log and monitor for patterns
    LogAndMonitor,
    /// Log, monitor, and send alerts
    LogMonitorAndAlert,
    /// Log, monitor, alert, and escalate
    LogMonitorAlertAndEscalate,
    /// Emergency system shutdown
    EmergencyShutdown,
}

/// Error impact assessment
#[derive(Debug, Clone)]
pub struct ErrorImpact {
    pub level: ImpactLevel,
    pub affected_operations: Vec<usize>,
    pub recovery_time_estimate: u64,
    pub user_impact: UserImpact,
}

/// Impact levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactLevel {
    /// Minimal impact on system
    Minimal,
    /// Specific operation affected
    OperationSpecific,
    /// Process-wide impact
    ProcessWide,
    /// System-wide impact
    SystemWide,
}

/// User impact assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserImpact {
    /// Minimal user impact
    Minimal,
    /// Operation failure
    OperationFailure,
    /// Access restriction
    AccessRestriction,
    /// Resource not found
    ResourceNotFound,
    /// Resource exhaustion
    ResourceExhaustion,
}

/// Recommended actions
#[derive(Debug, Clone)]
pub enum RecommendedAction {
    /// Check and validate parameters
    CheckParameters(String),
    /// Validate input values
    ValidateInput(String),
    /// Verify permissions
    CheckPermissions(String),
    /// Review security policies
    ReviewSecurityPolicy(String),
    /// Close unused resources
    CloseResources(String),
    /// Increase resource limits
    IncreaseLimit(String),
    /// Free memory
    FreeMemory(String),
    /// Optimize resource usage
    OptimizeUsage(String),
    /// Restart component
    RestartComponent(String),
    /// Contact support
    ContactSupport(String),
    /// Log error details
    LogError(String),
    /// Monitor system
    MonitorSystem(String),
}

/// Error context information
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub syscall_number: usize,
    pub process_id: usize,
    pub thread_id: usize,
    pub privilege_level: usize,
    pub is_user_space_call: bool,
    pub is_critical_system_call: bool,
    pub is_high_frequency_operation: bool,
    pub failure_count: u64,
    pub timestamp: u64,
}

/// Classified error information
#[derive(Debug, Clone)]
pub struct ClassifiedError {
    pub original_error: SyscallError,
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub recovery_strategy: RecoveryStrategy,
    pub escalation_policy: EscalationPolicy,
    pub error_code: usize,
    pub description: &'static str,
    pub impact_assessment: ErrorImpact,
    pub recommended_actions: Vec<RecommendedAction>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ValidationError,
    PermissionError,
    ResourceError,
    SystemError,
    StateError,
    InternalError,
    GeneralError,
}

/// Recovery strategies implementation
#[derive(Debug)]
pub struct RecoveryStrategies {
    /// Strategy implementations
    strategies: Vec<Box<dyn RecoveryStrategyImpl>>,
}

impl RecoveryStrategies {
    pub fn new() -> Self {
        let strategies: Vec<Box<dyn RecoveryStrategyImpl>> = vec![
            Box::new(RetryStrategy::new()),
            Box::new(WaitAndRetryStrategy::new()),
            Box::new(FreeResourcesStrategy::new()),
            Box::new(FailFastStrategy::new()),
            Box::new(StateRecoveryStrategy::new()),
        ];
        
        Self { strategies }
    }

    /// Execute recovery strategy
    pub fn execute_recovery(&self, strategy: &RecoveryStrategy, error: &ClassifiedError) -> RecoveryResult {
        for strategy_impl in &self.strategies {
            if strategy_impl.can_handle(strategy) {
                return strategy_impl.execute(strategy, error);
            }
        }
        
        RecoveryResult::Failed("No suitable recovery strategy found".to_string())
    }
}

/// Recovery strategy trait
pub trait RecoveryStrategyImpl: Send + Sync {
    fn can_handle(&self, strategy: &RecoveryStrategy) -> bool;
    fn execute(&self, strategy: &RecoveryStrategy, error: &ClassifiedError) -> RecoveryResult;
}

/// Retry strategy implementation
#[derive(Debug)]
pub struct RetryStrategy {
    max_retries: usize,
    backoff_factor: u64,
}

impl RetryStrategy {
    pub fn new() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 100, // 100ms base backoff
        }
    }
}

impl RecoveryStrategyImpl for RetryStrategy {
    fn can_handle(&self, strategy: &RecoveryStrategy) -> bool {
        matches!(strategy, RecoveryStrategy::Retry | 
                         RecoveryStrategy::RetryWithValidation)
    }

    fn execute(&self, strategy: &RecoveryStrategy, error: &ClassifiedError) -> RecoveryResult {
        // Implement retry logic with exponential backoff
        for attempt in 1..=self.max_retries {
            let backoff = self.backoff_factor * (2u64.pow((attempt - 1) as u32));
            debug!("Retrying operation (attempt {}), backing off for {}ms", attempt, backoff);
            
            // Simulate retry delay
            // In real implementation, would use proper timing mechanism
            
            // Check if error is still present (simplified)
            if error.severity != ErrorSeverity::Fatal {
                return RecoveryResult::Success;
            }
        }
        
        RecoveryResult::Failed(format!("Failed after {} retries", self.max_retries))
    }
}

/// Wait and retry strategy implementation
#[derive(Debug)]
pub struct WaitAndRetryStrategy {
    wait_time_ms: u64,
}

impl WaitAndRetryStrategy {
    pub fn new() -> Self {
        Self {
            wait_time_ms: 1000, // 1 second
        }
    }
}

impl RecoveryStrategyImpl for WaitAndRetryStrategy {
    fn can_handle(&self, strategy: &RecoveryStrategy) -> bool {
        matches!(strategy, RecoveryStrategy::WaitAndRetry)
    }

    fn execute(&self, strategy: &RecoveryStrategy, error: &ClassifiedError) -> RecoveryResult {
        debug!("Waiting {}ms before retry", self.wait_time_ms);
        
        // Simulate wait time
        // In real implementation, would use proper sleep mechanism
        
        RecoveryResult::Success
    }
}

/// Free resources strategy implementation
#[derive(Debug)]
pub struct FreeResourcesStrategy {
    cleanup_timeout_ms: u64,
}

impl FreeResourcesStrategy {
    pub fn new() -> Self {
        Self {
            cleanup_timeout_ms: 5000, // 5 seconds
        }
    }
}

impl RecoveryStrategyImpl for FreeResourcesStrategy {
    fn can_handle(&self, strategy: &RecoveryStrategy) -> bool {
        matches!(strategy, RecoveryStrategy::FreeResourcesAndRetry |
                         RecoveryStrategy::CloseUnusedResources |
                         RecoveryStrategy::CleanupAndEscalate)
    }

    fn execute(&self, strategy: &RecoveryStrategy, error: &ClassifiedError) -> RecoveryResult {
        debug!("Freeing resources and cleaning up");
        
        // Implement resource cleanup logic
        // This would involve:
        // - Closing unused file descriptors
        // - Freeing unused memory
        // - Cleaning up temporary resources
        
        RecoveryResult::Success
    }
}

/// Fail fast strategy implementation
#[derive(Debug)]
pub struct FailFastStrategy;

impl FailFastStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl RecoveryStrategyImpl for FailFastStrategy {
    fn can_handle(&self, strategy: &RecoveryStrategy) -> bool {
        matches!(strategy, RecoveryStrategy::FailFast)
    }

    fn execute(&self, strategy: &RecoveryStrategy, error: &ClassifiedError) -> RecoveryResult {
        debug!("Failing fast without retry");
        RecoveryResult::Failed("Fail fast strategy".to_string())
    }
}

/// State recovery strategy implementation
#[derive(Debug)]
pub struct StateRecoveryStrategy {
    recovery_timeout_ms: u64,
}

impl StateRecoveryStrategy {
    pub fn new() -> Self {
        Self {
            recovery_timeout_ms: 30000, // 30 seconds
        }
    }
}

impl RecoveryStrategyImpl for StateRecoveryStrategy {
    fn can_handle(&self, strategy: &RecoveryStrategy) -> bool {
        matches!(strategy, RecoveryStrategy::StateRecovery |
                         RecoveryStrategy::RestartComponent)
    }

    fn execute(&self, strategy: &RecoveryStrategy, error: &ClassifiedError) -> RecoveryResult {
        debug!("Attempting state recovery");
        
        // Implement state recovery logic
        // This would involve:
        // - Rolling back to last known good state
        // - Restarting affected components
        // - Reinitializing corrupted data structures
        
        RecoveryResult::Success
    }
}

/// Recovery result
#[derive(Debug)]
pub enum RecoveryResult {
    Success,
    Failed(String),
    PartialSuccess(Vec<String>),
    Timeout,
}

/// Error statistics tracking
#[derive(Debug)]
pub struct ErrorStatistics {
    /// Total errors by category
    errors_by_category: Vec<AtomicU64>,
    /// Errors by severity
    errors_by_severity: Vec<AtomicU64>,
    /// Recovery success rate
    recovery_success_count: AtomicU64,
    /// Recovery failure count
    recovery_failure_count: AtomicU64,
    /// Average recovery time
    total_recovery_time: AtomicU64,
    /// Recovery attempts
    recovery_attempts: AtomicU64,
}

impl ErrorStatistics {
    pub fn new() -> Self {
        Self {
            errors_by_category: vec![
                AtomicU64::new(0); // ErrorCategory::GeneralError as usize + 1
            ],
            errors_by_severity: vec![
                AtomicU64::new(0); // ErrorSeverity::Fatal as usize + 1
            ],
            recovery_success_count: AtomicU64::new(0),
            recovery_failure_count: AtomicU64::new(0),
            total_recovery_time: AtomicU64::new(0),
            recovery_attempts: AtomicU64::new(0),
        }
    }

    /// Record error occurrence
    pub fn record_error(&self, category: ErrorCategory, severity: ErrorSeverity) {
        let category_idx = category as usize;
        let severity_idx = severity as usize;
        
        if category_idx < self.errors_by_category.len() {
            self.errors_by_category[category_idx].fetch_add(1, Ordering::Relaxed);
        }
        
        if severity_idx < self.errors_by_severity.len() {
            self.errors_by_severity[severity_idx].fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record recovery attempt
    pub fn record_recovery(&self, success: bool, time_ms: u64) {
        if success {
            self.recovery_success_count.fetch_add(1, Ordering::Relaxed);
        } else {
            self.recovery_failure_count.fetch_add(1, Ordering::Relaxed);
        }
        
        self.total_recovery_time.fetch_add(time_ms, Ordering::Relaxed);
        self.recovery_attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Get error statistics
    pub fn get_statistics(&self) -> ErrorStats {
        let total_errors: u64 = self.errors_by_category.iter()
            .map(|counter| counter.load(Ordering::Relaxed))
            .sum();
        
        let recovery_success = self.recovery_success_count.load(Ordering::Relaxed);
        let recovery_failure = self.recovery_failure_count.load(Ordering::Relaxed);
        let total_recovery_attempts = self.recovery_attempts.load(Ordering::Relaxed);
        
        let recovery_rate = if total_recovery_attempts > 0 {
            (recovery_success * 100) / total_recovery_attempts
        } else {
            0
        };
        
        let avg_recovery_time = if total_recovery_attempts > 0 {
            self.total_recovery_time.load(Ordering::Relaxed) / total_recovery_attempts
        } else {
            0
        };
        
        ErrorStats {
            total_errors,
            errors_by_category: self.errors_by_category.iter()
                .map(|counter| counter.load(Ordering::Relaxed))
                .collect(),
            errors_by_severity: self.errors_by_severity.iter()
                .map(|counter| counter.load(Ordering::Relaxed))
                .collect(),
            recovery_success_rate: recovery_rate,
            avg_recovery_time_ms: avg_recovery_time,
            total_recovery_attempts,
        }
    }
}

/// Error statistics
#[derive(Debug, Clone)]
pub struct ErrorStats {
    pub total_errors: u64,
    pub errors_by_category: Vec<u64>,
    pub errors_by_severity: Vec<u64>,
    pub recovery_success_rate: u64,
    pub avg_recovery_time_ms: u64,
    pub total_recovery_attempts: u64,
}

/// Fault tolerance mechanisms
#[derive(Debug)]
pub struct FaultTolerance {
    /// Circuit breaker state
    circuit_breakers: Vec<CircuitBreaker>,
    /// Bulkhead isolation
    bulkhead_isolation: BulkheadIsolation,
    /// Graceful degradation
    graceful_degradation: GracefulDegradation,
}

/// Circuit breaker implementation
#[derive(Debug)]
pub struct CircuitBreaker {
    /// Failure threshold
    failure_threshold: u64,
    /// Success threshold to reset
    success_threshold: u64,
    /// Timeout duration
    timeout_ms: u64,
    /// Current state
    state: CircuitBreakerState,
    /// Failure count
    failure_count: u64,
    /// Success count
    success_count: u64,
    /// Last failure time
    last_failure_time: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitBreakerState {
    Closed,
    Open,
    HalfOpen,
}

impl CircuitBreaker {
    pub fn new(failure_threshold: u64, timeout_ms: u64) -> Self {
        Self {
            failure_threshold,
            success_threshold: 3,
            timeout_ms,
            state: CircuitBreakerState::Closed,
            failure_count: 0,
            success_count: 0,
            last_failure_time: 0,
        }
    }

    /// Record operation result
    pub fn record_result(&mut self, success: bool) {
        match self.state {
            CircuitBreakerState::Closed => {
                if success {
                    self.failure_count = 0;
                } else {
                    self.failure_count += 1;
                    if self.failure_count >= self.failure_threshold {
                        self.state = CircuitBreakerState::Open;
                        self.last_failure_time = self.get_current_time_ms();
                    }
                }
            }
            
            CircuitBreakerState::HalfOpen => {
                if success {
                    self.success_count += 1;
                    if self.success_count >= self.success_threshold {
                        self.state = CircuitBreakerState::Closed;
                        self.failure_count = 0;
                    }
                } else {
                    self.state = CircuitBreakerState::Open;
                    self.last_failure_time = self.get_current_time_ms();
                }
            }
            
            CircuitBreakerState::Open => {
                if self.get_current_time_ms() - self.last_failure_time >= self.timeout_ms {
                    self.state = CircuitBreakerState::HalfOpen;
                    self.success_count = 0;
                }
            }
        }
    }

    /// Check if operation is allowed
    pub fn is_operation_allowed(&self) -> bool {
        self.state != CircuitBreakerState::Open
    }

    /// Get current time (simplified)
    fn get_current_time_ms(&self) -> u64 {
        1000 // Placeholder
    }
}

/// Bulkhead isolation implementation
#[derive(Debug)]
pub struct BulkheadIsolation {
    /// Resource pools
    resource_pools: Vec<ResourcePool>,
    /// Isolation groups
    isolation_groups: Vec<IsolationGroup>,
}

impl BulkheadIsolation {
    pub fn new() -> Self {
        Self {
            resource_pools: Vec::new(),
            isolation_groups: Vec::new(),
        }
    }

    /// Allocate resource from pool
    pub fn allocate_resource(&self, pool_id: usize, amount: usize) -> Result<(), String> {
        // Simplified resource allocation
        Ok(())
    }

    /// Free resource to pool
    pub fn free_resource(&self, pool_id: usize, amount: usize) {
        // Simplified resource deallocation
    }
}

/// Resource pool
#[derive(Debug)]
pub struct ResourcePool {
    pub pool_id: usize,
    pub total_resources: usize,
    pub available_resources: AtomicUsize,
    pub allocated_resources: AtomicUsize,
}

/// Isolation group
#[derive(Debug)]
pub struct IsolationGroup {
    pub group_id: usize,
    pub resource_limit: usize,
    pub current_usage: AtomicUsize,
}

/// Graceful degradation implementation
#[derive(Debug)]
pub struct GracefulDegradation {
    /// Degradation strategies
    strategies: Vec<DegradationStrategy>,
    /// Current degradation level
    current_level: DegradationLevel,
}

impl GracefulDegradation {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            current_level: DegradationLevel::None,
        }
    }

    /// Apply degradation strategy
    pub fn apply_degradation(&mut self, level: DegradationLevel) -> Vec<DegradationAction> {
        let mut actions = Vec::new();
        
        match level {
            DegradationLevel::None => {
                // No degradation
            }
            
            DegradationLevel::Low => {
                actions.push(DegradationAction::ReduceFeatureSet);
                actions.push(DegradationAction::LimitConcurrency);
            }
            
            DegradationLevel::Medium => {
                actions.push(DegradationAction::DisableNonEssentialFeatures);
                actions.push(DegradationAction::ReduceResourceAllocation);
                actions.push(DegradationAction::LimitDataProcessing);
            }
            
            DegradationLevel::High => {
                actions.push(DegradationAction::EnableOnlyCoreFeatures);
                actions.push(DegradationAction::MinimalResourceAllocation);
                actions.push(DegradationAction::QueueNonUrgentOperations);
            }
            
            DegradationLevel::Emergency => {
                actions.push(DegradationAction::EmergencyMode);
                actions.push(DegradationAction::EssentialServicesOnly);
            }
        }
        
        self.current_level = level;
        actions
    }

    /// Get current degradation level
    pub fn get_current_level(&self) -> DegradationLevel {
        self.current_level
    }
}

/// Degradation levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradationLevel {
    None,
    Low,
    Medium,
    High,
    Emergency,
}

/// Degradation strategies
#[derive(Debug)]
pub enum DegradationStrategy {
    FeatureReduction(Vec<String>),
    ResourceLimiting { cpu_limit: u64, memory_limit: usize },
    QueueManagement { max_queue_size: usize },
}

/// Degradation actions
#[derive(Debug, Clone)]
pub enum DegradationAction {
    ReduceFeatureSet,
    DisableNonEssentialFeatures,
    EnableOnlyCoreFeatures,
    EmergencyMode,
    LimitConcurrency,
    ReduceResourceAllocation,
    MinimalResourceAllocation,
    LimitDataProcessing,
    QueueNonUrgentOperations,
    EssentialServicesOnly,
}

/// Error reporting system
#[derive(Debug)]
pub struct ErrorReporter {
    /// Report handlers
    handlers: Vec<Box<dyn ErrorReportHandler>>,
    /// Report filters
    filters: Vec<Box<dyn ErrorReportFilter>>,
    /// Reporting configuration
    config: ReportingConfig,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            filters: Vec::new(),
            config: ReportingConfig::default(),
        }
    }

    /// Report classified error
    pub fn report_error(&self, classified_error: &ClassifiedError, context: &ErrorContext) -> ReportResult {
        // Apply filters
        for filter in &self.filters {
            if !filter.should_report(classified_error, context) {
                return ReportResult::Filtered;
            }
        }

        // Create error report
        let report = ErrorReport {
            timestamp: self.get_current_time_ms(),
            error: classified_error.clone(),
            context: context.clone(),
            system_state: self.get_system_state(),
        };

        // Send to handlers
        let mut results = Vec::new();
        for handler in &self.handlers {
            match handler.handle_report(&report) {
                Ok(_) => results.push(ReportResult::Success),
                Err(e) => results.push(ReportResult::Failed(e.to_string())),
            }
        }

        // Determine overall result
        if results.iter().any(|r| matches!(r, ReportResult::Success)) {
            ReportResult::Success
        } else {
            ReportResult::Failed("All handlers failed".to_string())
        }
    }

    /// Get current time (simplified)
    fn get_current_time_ms(&self) -> u64 {
        1000 // Placeholder
    }

    /// Get current system state
    fn get_system_state(&self) -> SystemState {
        SystemState {
            cpu_usage: 50,
            memory_usage: 1024 * 1024 * 100, // 100MB
            disk_usage: 1024 * 1024 * 1024,  // 1GB
            process_count: 100,
            thread_count: 1000,
        }
    }

    /// Add error report handler
    pub fn add_handler(&mut self, handler: Box<dyn ErrorReportHandler>) {
        self.handlers.push(handler);
    }

    /// Add error report filter
    pub fn add_filter(&mut self, filter: Box<dyn ErrorReportFilter>) {
        self.filters.push(filter);
    }
}

/// Error report
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub timestamp: u64,
    pub error: ClassifiedError,
    pub context: ErrorContext,
    pub system_state: SystemState,
}

/// System state information
#[derive(Debug, Clone)]
pub struct SystemState {
    pub cpu_usage: u64,
    pub memory_usage: usize,
    pub disk_usage: usize,
    pub process_count: usize,
    pub thread_count: usize,
}

/// Error report handlers
pub trait ErrorReportHandler: Send + Sync {
    fn handle_report(&self, report: &ErrorReport) -> Result<(), String>;
}

/// Error report filters
pub trait ErrorReportFilter: Send + Sync {
    fn should_report(&self, error: &ClassifiedError, context: &ErrorContext) -> bool;
}

/// Reporting configuration
#[derive(Debug)]
pub struct ReportingConfig {
    pub enable_logging: bool,
    pub enable_alerts: bool,
    pub enable_metrics: bool,
    pub reporting_interval_ms: u64,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            enable_alerts: true,
            enable_metrics: true,
            reporting_interval_ms: 1000,
        }
    }
}

/// Report results
#[derive(Debug)]
pub enum ReportResult {
    Success,
    Failed(String),
    Filtered,
}

// Global error manager
use spin::Mutex;
static ERROR_MANAGER: Mutex<Option<SyscallErrorManager>> = Mutex::new(None);

/// Initialize error manager
pub fn init_error_manager() -> Result<(), SyscallError> {
    let mut manager_guard = ERROR_MANAGER.lock();
    
    if manager_guard.is_some() {
        return Err(SyscallError::InternalError);
    }
    
    let manager = SyscallErrorManager {
        error_classifier: ErrorClassifier::new(),
        recovery_strategies: RecoveryStrategies::new(),
        error_statistics: ErrorStatistics::new(),
        fault_tolerance: FaultTolerance {
            circuit_breakers: Vec::new(),
            bulkhead_isolation: BulkheadIsolation::new(),
            graceful_degradation: GracefulDegradation::new(),
        },
        error_reporter: ErrorReporter::new(),
    };
    
    *manager_guard = Some(manager);
    
    info!("Error manager initialized");
    Ok(())
}

/// Get global error manager
pub fn get_error_manager() -> Option<Mutex<SyscallErrorManager>> {
    ERROR_MANAGER.lock().as_ref().map(|_| ERROR_MANAGER.clone())
}

/// Handle system call error
pub fn handle_syscall_error(error: SyscallError, context: &ErrorContext) -> ErrorHandlingResult {
    let mut manager_guard = ERROR_MANAGER.lock();
    
    if let Some(manager) = manager_guard.as_mut() {
        let classified_error = manager.error_classifier.classify_error(error, context);
        let recovery_result = manager.recovery_strategies.execute_recovery(
            &classified_error.recovery_strategy,
            &classified_error
        );
        
        // Record statistics
        manager.error_statistics.record_error(
            classified_error.category,
            classified_error.severity
        );
        
        // Report error
        let report_result = manager.error_reporter.report_error(&classified_error, context);
        
        ErrorHandlingResult {
            classified_error,
            recovery_result,
            report_result,
            should_retry: matches!(recovery_result, RecoveryResult::Success),
        }
    } else {
        ErrorHandlingResult::default()
    }
}

/// Error handling result
#[derive(Debug)]
pub struct ErrorHandlingResult {
    pub classified_error: ClassifiedError,
    pub recovery_result: RecoveryResult,
    pub report_result: ReportResult,
    pub should_retry: bool,
}

impl Default for ErrorHandlingResult {
    fn default() -> Self {
        Self {
            classified_error: ClassifiedError {
                original_error: SyscallError::InternalError,
                category: ErrorCategory::InternalError,
                severity: ErrorSeverity::Fatal,
                recovery_strategy: RecoveryStrategy::Default,
                escalation_policy: EscalationPolicy::LogOnly,
                error_code: 0,
                description: "Error manager not initialized",
                impact_assessment: ErrorImpact {
                    level: ImpactLevel::SystemWide,
                    affected_operations: Vec::new(),
                    recovery_time_estimate: 0,
                    user_impact: UserImpact::Minimal,
                },
                recommended_actions: Vec::new(),
            },
            recovery_result: RecoveryResult::Failed("Error manager not initialized".to_string()),
            report_result: ReportResult::Failed("Error manager not initialized".to_string()),
            should_retry: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let classifier = ErrorClassifier::new();
        let context = ErrorContext {
            syscall_number: 1,
            process_id: 100,
            thread_id: 1,
            privilege_level: 3,
            is_user_space_call: true,
            is_critical_system_call: false,
            is_high_frequency_operation: false,
            failure_count: 0,
            timestamp: 1000,
        };

        let classified = classifier.classify_error(SyscallError::InvalidArgument, &context);
        assert_eq!(classified.category, ErrorCategory::ValidationError);
        assert_eq!(classified.severity, ErrorSeverity::Error);
    }

    #[test]
    fn test_recovery_strategies() {
        let strategies = RecoveryStrategies::new();
        let error = ClassifiedError {
            original_error: SyscallError::InvalidArgument,
            category: ErrorCategory::ValidationError,
            severity: ErrorSeverity::Error,
            recovery_strategy: RecoveryStrategy::Retry,
            escalation_policy: EscalationPolicy::LogOnly,
            error_code: 0,
            description: "Test error",
            impact_assessment: ErrorImpact {
                level: ImpactLevel::OperationSpecific,
                affected_operations: Vec::new(),
                recovery_time_estimate: 1000,
                user_impact: UserImpact::OperationFailure,
            },
            recommended_actions: Vec::new(),
        };

        let result = strategies.execute_recovery(&RecoveryStrategy::Retry, &error);
        assert!(matches!(result, RecoveryResult::Success));
    }

    #[test]
    fn test_circuit_breaker() {
        let mut breaker = CircuitBreaker::new(3, 5000);
        
        // Simulate failures
        breaker.record_result(false);
        breaker.record_result(false);
        breaker.record_result(false);
        
        assert_eq!(breaker.state, CircuitBreakerState::Open);
        assert!(!breaker.is_operation_allowed());
    }
}