//! Hypervisor Core Implementation
//! 
//! The main hypervisor structure that manages virtual machines and provides
//! virtualization services for the MultiOS system.

use crate::{HypervisorCapabilities, ArchType, MAX_VMS};
use crate::vm_manager::VmManager;
use crate::vcpu::VcpuManager;
use crate::HypervisorError;

use alloc::vec::Vec;
use alloc::sync::Arc;
use spin::RwLock;

/// Main hypervisor structure
#[derive(Debug)]
pub struct Hypervisor {
    /// Hardware virtualization capabilities
    capabilities: HypervisorCapabilities,
    /// CPU architecture type
    arch: ArchType,
    /// Virtual Machine Manager
    vm_manager: Arc<RwLock<VmManager>>,
    /// VCPU Manager
    vcpu_manager: Arc<RwLock<VcpuManager>>,
    /// Number of active VMs
    active_vm_count: usize,
    /// Hypervisor uptime in milliseconds
    uptime_ms: u64,
    /// Performance statistics
    stats: HypervisorStats,
}

impl Hypervisor {
    /// Create a new hypervisor instance
    pub fn new(capabilities: HypervisorCapabilities) -> Result<Self, HypervisorError> {
        // Determine architecture type
        let arch = detect_architecture();
        
        // Validate minimum requirements
        if capabilities.is_empty() {
            return Err(HypervisorError::InsufficientHardwareSupport);
        }
        
        // Initialize VM manager
        let vm_manager = Arc::new(RwLock::new(VmManager::new()?));
        
        // Initialize VCPU manager  
        let vcpu_manager = Arc::new(RwLock::new(VcpuManager::new()?));
        
        // Create hypervisor instance
        let hypervisor = Hypervisor {
            capabilities,
            arch,
            vm_manager,
            vcpu_manager,
            active_vm_count: 0,
            uptime_ms: 0,
            stats: HypervisorStats::default(),
        };
        
        info!("Hypervisor created with capabilities: {:?}", capabilities);
        Ok(hypervisor)
    }
    
    /// Get hypervisor capabilities
    pub fn get_capabilities(&self) -> HypervisorCapabilities {
        self.capabilities
    }
    
    /// Get CPU architecture type
    pub fn get_architecture(&self) -> ArchType {
        self.arch
    }
    
    /// Create a new virtual machine
    pub fn create_vm(&mut self, config: VmConfig) -> Result<VmId, HypervisorError> {
        if self.active_vm_count >= MAX_VMS {
            return Err(HypervisorError::TooManyVms);
        }
        
        let vm_id = self.vm_manager.write().create_vm(config)?;
        self.active_vm_count += 1;
        
        info!("Created VM with ID: {:?}", vm_id);
        Ok(vm_id)
    }
    
    /// Start a virtual machine
    pub fn start_vm(&mut self, vm_id: VmId) -> Result<(), HypervisorError> {
        self.vm_manager.write().start_vm(vm_id)?;
        
        info!("Started VM: {:?}", vm_id);
        Ok(())
    }
    
    /// Stop a virtual machine
    pub fn stop_vm(&mut self, vm_id: VmId, force: bool) -> Result<(), HypervisorError> {
        self.vm_manager.write().stop_vm(vm_id, force)?;
        self.active_vm_count = self.active_vm_count.saturating_sub(1);
        
        info!("Stopped VM: {:?}", vm_id);
        Ok(())
    }
    
    /// Pause a virtual machine
    pub fn pause_vm(&mut self, vm_id: VmId) -> Result<(), HypervisorError> {
        self.vm_manager.write().pause_vm(vm_id)?;
        info!("Paused VM: {:?}", vm_id);
        Ok(())
    }
    
    /// Resume a virtual machine
    pub fn resume_vm(&mut self, vm_id: VmId) -> Result<(), HypervisorError> {
        self.vm_manager.write().resume_vm(vm_id)?;
        info!("Resumed VM: {:?}", vm_id);
        Ok(())
    }
    
    /// Delete a virtual machine
    pub fn delete_vm(&mut self, vm_id: VmId) -> Result<(), HypervisorError> {
        self.vm_manager.write().delete_vm(vm_id)?;
        self.active_vm_count = self.active_vm_count.saturating_sub(1);
        
        info!("Deleted VM: {:?}", vm_id);
        Ok(())
    }
    
    /// Get VM configuration
    pub fn get_vm_config(&self, vm_id: VmId) -> Result<VmConfig, HypervisorError> {
        self.vm_manager.read().get_vm_config(vm_id)
    }
    
    /// List all VMs
    pub fn list_vms(&self) -> Result<Vec<VmInfo>, HypervisorError> {
        self.vm_manager.read().list_vms()
    }
    
    /// Get hypervisor statistics
    pub fn get_stats(&self) -> &HypervisorStats {
        &self.stats
    }
    
    /// Update statistics
    pub fn update_stats(&mut self) {
        self.uptime_ms += 1; // Simplified - would use actual time intervals
        self.stats.update_from_vm_manager(&self.vm_manager.read());
    }
    
    /// Enable nested virtualization
    pub fn enable_nested_virt(&mut self, enable: bool) -> Result<(), HypervisorError> {
        if enable && !self.capabilities.contains(HypervisorCapabilities::NESTED_VIRT) {
            return Err(HypervisorError::FeatureNotSupported);
        }
        
        // Configure nested virtualization settings
        // This would involve setting up additional VMCS/VMCB configurations
        
        Ok(())
    }
    
    /// Get performance monitoring data
    pub fn get_performance_data(&self) -> PerformanceData {
        PerformanceData {
            uptime_ms: self.uptime_ms,
            active_vms: self.active_vm_count,
            total_vcpu_hits: self.stats.total_vcpu_hits,
            vm_exit_count: self.stats.vm_exit_count,
            memory_usage_mb: self.stats.memory_usage_mb,
            cpu_usage_percent: self.stats.cpu_usage_percent,
        }
    }
}

impl Clone for Hypervisor {
    fn clone(&self) -> Self {
        Hypervisor {
            capabilities: self.capabilities,
            arch: self.arch,
            vm_manager: Arc::clone(&self.vm_manager),
            vcpu_manager: Arc::clone(&self.vcpu_manager),
            active_vm_count: self.active_vm_count,
            uptime_ms: self.uptime_ms,
            stats: self.stats,
        }
    }
}

/// Detect CPU architecture
fn detect_architecture() -> ArchType {
    #[cfg(target_arch = "x86_64")]
    {
        // This is a simplified detection - real implementation would check CPUID
        ArchType::X86_64
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        ArchType::AArch64
    }
    
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        ArchType::Unknown
    }
}

/// Hypervisor performance statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct HypervisorStats {
    pub total_vm_exits: u64,
    pub total_vcpu_hits: u64,
    pub vm_exit_count: u64,
    pub memory_usage_mb: u64,
    pub cpu_usage_percent: f32,
}

impl HypervisorStats {
    /// Update statistics from VM manager
    fn update_from_vm_manager(&mut self, vm_manager: &VmManager) {
        // Simplified - would collect actual statistics
        self.total_vm_exits += 1;
        self.vm_exit_count += 1;
    }
}

/// Performance monitoring data
#[derive(Debug, Clone)]
pub struct PerformanceData {
    pub uptime_ms: u64,
    pub active_vms: usize,
    pub total_vcpu_hits: u64,
    pub vm_exit_count: u64,
    pub memory_usage_mb: u64,
    pub cpu_usage_percent: f32,
}