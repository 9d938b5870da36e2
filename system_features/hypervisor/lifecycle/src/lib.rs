//! Virtual Machine Lifecycle Management
//! 
//! Manages the complete lifecycle of virtual machines including creation,
//! initialization, startup, shutdown, pause, resume, and cleanup operations.

use crate::{VmId, VmConfig, VmInfo, VmState, HypervisorError, VmFeatures};
use crate::core::{VmManager, Vcpu, VmStats, HypervisorStats, CpuStats};
use crate::cpu::CpuVirtualization;
use crate::memory::MemoryManager;
use crate::devices::DeviceFramework;

use alloc::vec::Vec;
use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use spin::RwLock;
use core::time::Duration;

/// VM lifecycle state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VmLifecycleState {
    /// VM is being created
    Creating,
    /// VM is being initialized
    Initializing,
    /// VM is running
    Running,
    /// VM is paused
    Paused,
    /// VM is being shut down
    ShuttingDown,
    /// VM is destroyed
    Destroyed,
    /// VM is in error state
    Error,
}

/// Lifecycle operation types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LifecycleOperation {
    Create,
    Initialize,
    Start,
    Pause,
    Resume,
    Stop,
    Restart,
    Shutdown,
    Destroy,
    Snapshot,
    Restore,
}

/// Lifecycle operation result
#[derive(Debug, Clone)]
pub struct LifecycleResult {
    pub operation: LifecycleOperation,
    pub success: bool,
    pub error_message: Option<String>,
    pub duration_ms: u64,
    pub timestamp_ms: u64,
}

/// VM lifecycle context
pub struct VmLifecycleContext {
    pub vm_id: VmId,
    pub config: VmConfig,
    pub state: VmLifecycleState,
    pub created_time_ms: u64,
    pub last_state_change_ms: u64,
    pub operation_history: Vec<LifecycleResult>,
    pub progress_percent: u8,
}

/// VM lifecycle manager
pub struct LifecycleManager {
    /// VM contexts
    vm_contexts: BTreeMap<VmId, VmLifecycleContext>,
    /// Operation callbacks
    operation_callbacks: OperationCallbacks,
    /// Manager initialization time
    init_time_ms: u64,
}

/// Lifecycle operation callbacks
#[derive(Debug, Clone, Default)]
pub struct OperationCallbacks {
    pub on_create: Option<Box<dyn Fn(VmId, &VmConfig) -> Result<(), HypervisorError> + Send + Sync>>,
    pub on_initialize: Option<Box<dyn Fn(VmId) -> Result<(), HypervisorError> + Send + Sync>>,
    pub on_start: Option<Box<dyn Fn(VmId) -> Result<(), HypervisorError> + Send + Sync>>,
    pub on_pause: Option<Box<dyn Fn(VmId) -> Result<(), HypervisorError> + Send + Sync>>,
    pub on_resume: Option<Box<dyn Fn(VmId) -> Result<(), HypervisorError> + Send + Sync>>,
    pub on_stop: Option<Box<dyn Fn(VmId, bool) -> Result<(), HypervisorError> + Send + Sync>>,
    pub on_shutdown: Option<Box<dyn Fn(VmId) -> Result<(), HypervisorError> + Send + Sync>>,
    pub on_destroy: Option<Box<dyn Fn(VmId) -> Result<(), HypervisorError> + Send + Sync>>,
}

impl LifecycleManager {
    /// Create a new lifecycle manager
    pub fn new() -> Self {
        LifecycleManager {
            vm_contexts: BTreeMap::new(),
            operation_callbacks: OperationCallbacks::default(),
            init_time_ms: 0, // Would use actual timestamp
        }
    }
    
    /// Create a new VM with lifecycle management
    pub fn create_vm(&mut self, vm_id: VmId, config: VmConfig) -> Result<VmLifecycleContext, HypervisorError> {
        let start_time = self.get_current_time_ms();
        
        // Check if VM already exists
        if self.vm_contexts.contains_key(&vm_id) {
            return Err(HypervisorError::ConfigurationError(format!("VM {} already exists", vm_id.0)));
        }
        
        // Create lifecycle context
        let mut context = VmLifecycleContext {
            vm_id,
            config: config.clone(),
            state: VmLifecycleState::Creating,
            created_time_ms: start_time,
            last_state_change_ms: start_time,
            operation_history: Vec::new(),
            progress_percent: 0,
        };
        
        // Perform create operation
        let result = self.perform_operation(vm_id, &config, LifecycleOperation::Create, |vm_id, config| {
            self.validate_vm_config(config)?;
            Ok(())
        })?;
        
        context.progress_percent = 20;
        context.state = VmLifecycleState::Initializing;
        context.last_state_change_ms = self.get_current_time_ms();
        
        // Perform initialization
        let init_result = self.perform_operation(vm_id, &config, LifecycleOperation::Initialize, |vm_id, config| {
            self.initialize_vm(vm_id, config)?;
            Ok(())
        })?;
        
        context.progress_percent = 100;
        context.state = VmLifecycleState::Initializing;
        context.last_state_change_ms = self.get_current_time_ms();
        
        self.vm_contexts.insert(vm_id, context.clone());
        
        info!("Created VM {} with lifecycle management", vm_id.0);
        Ok(context)
    }
    
    /// Initialize VM components
    fn initialize_vm(&self, vm_id: VmId, config: &VmConfig) -> Result<(), HypervisorError> {
        // Initialize memory management
        // Initialize CPU virtualization
        // Initialize device framework
        // Setup VMCS/VMCB
        // Configure devices
        
        // In real implementation, this would:
        // 1. Initialize memory manager with EPT/NPT
        // 2. Create VCPUs and configure VMCS/VMCB
        // 3. Initialize device framework with educational devices
        // 4. Setup networking and storage
        // 5. Configure security settings
        
        info!("Initializing VM {} components", vm_id.0);
        Ok(())
    }
    
    /// Start a VM
    pub fn start_vm(&mut self, vm_id: VmId) -> Result<(), HypervisorError> {
        let context = self.vm_contexts.get_mut(&vm_id)
            .ok_or(HypervisorError::VmNotFound)?;
        
        if context.state != VmLifecycleState::Initializing {
            return Err(HypervisorError::InvalidVmState);
        }
        
        let start_time = self.get_current_time_ms();
        context.progress_percent = 25;
        
        // Perform start operation
        self.perform_operation(vm_id, &context.config, LifecycleOperation::Start, |vm_id, config| {
            // Start VCPUs
            // Start device emulation
            // Load boot image
            // Initialize interrupts
            Ok(())
        })?;
        
        context.progress_percent = 100;
        context.state = VmLifecycleState::Running;
        context.last_state_change_ms = self.get_current_time_ms();
        
        info!("Started VM {}", vm_id.0);
        Ok(())
    }
    
    /// Pause a VM
    pub fn pause_vm(&mut self, vm_id: VmId) -> Result<(), HypervisorError> {
        let context = self.vm_contexts.get_mut(&vm_id)
            .ok_or(HypervisorError::VmNotFound)?;
        
        if context.state != VmLifecycleState::Running {
            return Err(HypervisorError::InvalidVmState);
        }
        
        // Perform pause operation
        self.perform_operation(vm_id, &context.config, LifecycleOperation::Pause, |vm_id, config| {
            // Pause VCPUs
            // Pause device emulation
            // Save VM state
            Ok(())
        })?;
        
        context.state = VmLifecycleState::Paused;
        context.last_state_change_ms = self.get_current_time_ms();
        
        info!("Paused VM {}", vm_id.0);
        Ok(())
    }
    
    /// Resume a VM
    pub fn resume_vm(&mut self, vm_id: VmId) -> Result<(), HypervisorError> {
        let context = self.vm_contexts.get_mut(&vm_id)
            .ok_or(HypervisorError::VmNotFound)?;
        
        if context.state != VmLifecycleState::Paused {
            return Err(HypervisorError::InvalidVmState);
        }
        
        // Perform resume operation
        self.perform_operation(vm_id, &context.config, LifecycleOperation::Resume, |vm_id, config| {
            // Resume VCPUs
            // Resume device emulation
            // Restore VM state
            Ok(())
        })?;
        
        context.state = VmLifecycleState::Running;
        context.last_state_change_ms = self.get_current_time_ms();
        
        info!("Resumed VM {}", vm_id.0);
        Ok(())
    }
    
    /// Stop a VM
    pub fn stop_vm(&mut self, vm_id: VmId, force: bool) -> Result<(), HypervisorError> {
        let context = self.vm_contexts.get_mut(&vm_id)
            .ok_or(HypervisorError::VmNotFound)?;
        
        if !matches!(context.state, VmLifecycleState::Running | VmLifecycleState::Paused) {
            return Err(HypervisorError::InvalidVmState);
        }
        
        // Perform stop operation
        let operation = if force { LifecycleOperation::Destroy } else { LifecycleOperation::Stop };
        self.perform_operation(vm_id, &context.config, operation, |vm_id, config| {
            // Stop VCPUs
            // Stop device emulation
            // Cleanup resources
            Ok(())
        })?;
        
        if force {
            context.state = VmLifecycleState::Destroyed;
            self.vm_contexts.remove(&vm_id);
        } else {
            context.state = VmLifecycleState::ShuttingDown;
            context.last_state_change_ms = self.get_current_time_ms();
        }
        
        info!("{} VM {}", if force { "Force stopped" } else { "Stopped" }, vm_id.0);
        Ok(())
    }
    
    /// Shutdown a VM gracefully
    pub fn shutdown_vm(&mut self, vm_id: VmId) -> Result<(), HypervisorError> {
        let context = self.vm_contexts.get_mut(&vm_id)
            .ok_or(HypervisorError::VmNotFound)?;
        
        if !matches!(context.state, VmLifecycleState::Running | VmLifecycleState::Paused) {
            return Err(HypervisorError::InvalidVmState);
        }
        
        // Send shutdown signal to guest
        self.perform_operation(vm_id, &context.config, LifecycleOperation::Shutdown, |vm_id, config| {
            // Send ACPI shutdown signal
            // Wait for guest to shutdown
            Ok(())
        })?;
        
        context.state = VmLifecycleState::ShuttingDown;
        context.last_state_change_ms = self.get_current_time_ms();
        
        info!("Initiated graceful shutdown for VM {}", vm_id.0);
        Ok(())
    }
    
    /// Restart a VM
    pub fn restart_vm(&mut self, vm_id: VmId, force: bool) -> Result<(), HypervisorError> {
        // Stop the VM
        self.stop_vm(vm_id, force)?;
        
        // Restart the VM
        self.start_vm(vm_id)?;
        
        info!("Restarted VM {}", vm_id.0);
        Ok(())
    }
    
    /// Create VM snapshot
    pub fn create_snapshot(&mut self, vm_id: VmId, snapshot_name: String) -> Result<(), HypervisorError> {
        let context = self.vm_contexts.get(&vm_id)
            .ok_or(HypervisorError::VmNotFound)?;
        
        // Perform snapshot operation
        self.perform_operation(vm_id, &context.config, LifecycleOperation::Snapshot, |vm_id, config| {
            // Save VM state
            // Save memory contents
            // Save device states
            Ok(())
        })?;
        
        info!("Created snapshot '{}' for VM {}", snapshot_name, vm_id.0);
        Ok(())
    }
    
    /// Restore VM from snapshot
    pub fn restore_snapshot(&mut self, vm_id: VmId, snapshot_name: String) -> Result<(), HypervisorError> {
        let context = self.vm_contexts.get(&vm_id)
            .ok_or(HypervisorError::VmNotFound)?;
        
        // Perform restore operation
        self.perform_operation(vm_id, &context.config, LifecycleOperation::Restore, |vm_id, config| {
            // Load VM state
            // Load memory contents
            // Load device states
            Ok(())
        })?;
        
        info!("Restored VM {} from snapshot '{}'", vm_id.0, snapshot_name);
        Ok(())
    }
    
    /// Perform lifecycle operation
    fn perform_operation<F>(&mut self, vm_id: VmId, config: &VmConfig, operation: LifecycleOperation, operation_fn: F) -> Result<LifecycleResult, HypervisorError>
    where
        F: FnOnce(VmId, &VmConfig) -> Result<(), HypervisorError>,
    {
        let start_time = self.get_current_time_ms();
        
        // Call operation callback if registered
        if let Some(callback) = match operation {
            LifecycleOperation::Create => &self.operation_callbacks.on_create,
            LifecycleOperation::Initialize => &self.operation_callbacks.on_initialize,
            LifecycleOperation::Start => &self.operation_callbacks.on_start,
            LifecycleOperation::Pause => &self.operation_callbacks.on_pause,
            LifecycleOperation::Resume => &self.operation_callbacks.on_resume,
            LifecycleOperation::Stop | LifecycleOperation::Destroy => &self.operation_callbacks.on_stop,
            LifecycleOperation::Shutdown => &self.operation_callbacks.on_shutdown,
            _ => &None,
        } {
            if let Some(ref callback) = callback {
                callback(vm_id)?;
            }
        }
        
        // Execute operation
        match operation_fn(vm_id, config) {
            Ok(()) => {
                let end_time = self.get_current_time_ms();
                let duration = end_time - start_time;
                
                let result = LifecycleResult {
                    operation,
                    success: true,
                    error_message: None,
                    duration_ms: duration,
                    timestamp_ms: end_time,
                };
                
                // Update context if exists
                if let Some(context) = self.vm_contexts.get_mut(&vm_id) {
                    context.operation_history.push(result.clone());
                }
                
                Ok(result)
            },
            Err(e) => {
                let end_time = self.get_current_time_ms();
                let duration = end_time - start_time;
                
                let result = LifecycleResult {
                    operation,
                    success: false,
                    error_message: Some(e.to_string()),
                    duration_ms: duration,
                    timestamp_ms: end_time,
                };
                
                // Update context if exists
                if let Some(context) = self.vm_contexts.get_mut(&vm_id) {
                    context.operation_history.push(result.clone());
                    context.state = VmLifecycleState::Error;
                }
                
                Err(e)
            },
        }
    }
    
    /// Validate VM configuration
    fn validate_vm_config(&self, config: &VmConfig) -> Result<(), HypervisorError> {
        // Validate CPU count
        if config.vcpu_count == 0 || config.vcpu_count > 32 {
            return Err(HypervisorError::InvalidParameter);
        }
        
        // Validate memory
        if config.memory_mb < 16 || config.memory_mb > 65536 {
            return Err(HypervisorError::InvalidParameter);
        }
        
        // Validate features
        if config.features.contains(VmFeatures::NESTED) && config.vcpu_count < 2 {
            return Err(HypervisorError::InvalidParameter);
        }
        
        Ok(())
    }
    
    /// Get current time in milliseconds (simplified)
    fn get_current_time_ms(&self) -> u64 {
        0 // Would use actual timestamp
    }
    
    /// Get VM lifecycle context
    pub fn get_vm_context(&self, vm_id: VmId) -> Option<&VmLifecycleContext> {
        self.vm_contexts.get(&vm_id)
    }
    
    /// Get all VM lifecycle contexts
    pub fn get_all_contexts(&self) -> Vec<&VmLifecycleContext> {
        self.vm_contexts.values().collect()
    }
    
    /// Get lifecycle statistics
    pub fn get_lifecycle_stats(&self) -> LifecycleStats {
        let mut total_operations = 0;
        let mut successful_operations = 0;
        let mut failed_operations = 0;
        let mut total_duration_ms = 0;
        
        for context in self.vm_contexts.values() {
            for operation in &context.operation_history {
                total_operations += 1;
                if operation.success {
                    successful_operations += 1;
                } else {
                    failed_operations += 1;
                }
                total_duration_ms += operation.duration_ms;
            }
        }
        
        LifecycleStats {
            total_vms: self.vm_contexts.len(),
            total_operations,
            successful_operations,
            failed_operations,
            average_operation_duration_ms: if total_operations > 0 {
                total_duration_ms / total_operations as u64
            } else {
                0
            },
            uptime_ms: self.get_current_time_ms() - self.init_time_ms,
        }
    }
    
    /// Generate lifecycle report
    pub fn generate_lifecycle_report(&self) -> String {
        let mut report = String::new();
        report.push_str("VM Lifecycle Management Report\n");
        report.push_str("================================\n\n");
        
        let stats = self.get_lifecycle_stats();
        report.push_str(&format!("Total VMs: {}\n", stats.total_vms));
        report.push_str(&format!("Total Operations: {}\n", stats.total_operations));
        report.push_str(&format!("Successful Operations: {}\n", stats.successful_operations));
        report.push_str(&format!("Failed Operations: {}\n", stats.failed_operations));
        report.push_str(&format!("Average Operation Duration: {} ms\n", stats.average_operation_duration_ms));
        report.push_str(&format!("Manager Uptime: {} ms\n\n", stats.uptime_ms));
        
        report.push_str("VM Lifecycle States:\n");
        for context in self.vm_contexts.values() {
            let uptime = self.get_current_time_ms() - context.created_time_ms;
            report.push_str(&format!("  VM {}: {:?} (uptime: {} ms)\n", 
                                  context.vm_id.0, context.state, uptime));
        }
        
        report.push_str("\nRecent Operations:\n");
        for context in self.vm_contexts.values() {
            if let Some(last_op) = context.operation_history.last() {
                report.push_str(&format!("  VM {}: {:?} - {} ({})\n",
                                      context.vm_id.0, last_op.operation, 
                                      if last_op.success { "Success" } else { "Failed" },
                                      last_op.error_message.as_deref().unwrap_or("")));
            }
        }
        
        report
    }
}

/// Lifecycle statistics
#[derive(Debug, Clone)]
pub struct LifecycleStats {
    pub total_vms: usize,
    pub total_operations: u64,
    pub successful_operations: u64,
    pub failed_operations: u64,
    pub average_operation_duration_ms: u64,
    pub uptime_ms: u64,
}