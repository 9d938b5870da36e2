//! VCPU Management
//! 
//! Handles virtual CPU creation, management, and execution for virtual machines.
//! Supports hardware virtualization extensions like Intel VT-x and AMD-V.

use crate::{VmId, HypervisorError, MAX_VCPUS_PER_VM};
use crate::hypervisor::HypervisorCapabilities;

use alloc::sync::Arc;
use spin::RwLock;
use bitflags::bitflags;

/// Virtual CPU ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VcpuId(pub u32);

/// VCPU Register state
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct VcpuRegs {
    pub rax: u64, pub rbx: u64, pub rcx: u64, pub rdx: u64,
    pub rsi: u64, pub rdi: u64, pub rbp: u64, pub rsp: u64,
    pub r8: u64, pub r9: u64, pub r10: u64, pub r11: u64,
    pub r12: u64, pub r13: u64, pub r14: u64, pub r15: u64,
    pub rip: u64, pub rflags: u64,
}

/// VCPU Control registers
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct VcpuCtrlRegs {
    pub cr0: u64, pub cr2: u64, pub cr3: u64, pub cr4: u64,
    pub dr0: u64, pub dr1: u64, pub dr2: u64, pub dr3: u64,
    pub dr6: u64, pub dr7: u64,
    pub gdt_base: u64, pub gdt_limit: u16,
    pub idt_base: u64, pub idt_limit: u16,
    pub ldt_base: u64, pub ldt_limit: u16,
    pub tss_base: u64, pub tss_limit: u16,
}

/// VMCS/VMCB structure for hardware virtualization
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct VcpuState {
    pub regs: VcpuRegs,
    pub ctrl_regs: VcpuCtrlRegs,
    pub msrs: [MsrEntry; 8], // Simplified MSR handling
    pub cs_selector: u16, pub ds_selector: u16,
    pub es_selector: u16, pub fs_selector: u16,
    pub gs_selector: u16, pub ss_selector: u16,
    pub tr_selector: u16, pub ldtr_selector: u16,
}

/// MSR Register entry
#[derive(Debug, Clone, Copy)]
pub struct MsrEntry {
    pub index: u32,
    pub value: u64,
}

/// VCPU execution state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VcpuStateType {
    /// VCPU is not initialized
    Uninitialized,
    /// VCPU is running
    Running,
    /// VCPU is paused
    Paused,
    /// VCPU is halted
    Halted,
    /// VCPU is waiting for I/O
    WaitingIo,
    /// VCPU is in error state
    Error,
}

/// VCPU flags for configuration
bitflags! {
    #[derive(Debug, Clone, Copy)]
    pub struct VcpuFlags: u32 {
        const INTR_WINDOW = 1 << 0;
        const NMI_WINDOW = 1 << 1;
        const SMM_WINDOW = 1 << 2;
        const INJECT_INTERRUPT = 1 << 3;
        const USE_MSR_BITMAP = 1 << 4;
        const USE_IO_BITMAP = 1 << 5;
        const CREATE_EPT = 1 << 6;
        const DEBUG = 1 << 7;
        const MONITORING = 1 << 8;
    }
}

/// VM Exit reason enumeration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VmExitReason {
    Exception,
    Interrupt,
    TripleFault,
    IoInstruction,
    MsrRead,
    MsrWrite,
    CpuidInstruction,
    GetsecInstruction,
    HltInstruction,
    InvdInstruction,
    WbinvdInstruction,
    MonitorInstruction,
    MwaitInstruction,
    ControlRegisterAccess,
    MovCr3,
    MovDr3,
    MovDr,
    DescriptorTableAccess,
    RdmsrInstruction,
    WrmsrInstruction,
    InvalidState,
    SoftwareInterrupt,
    ShadowVmcs,
    PendingMtpr,
    NmiWindow,
    TaskSwitch,
    Vmfunc,
    EnableEptViolation,
    AccessToVmcs,
    Unknown,
}

/// Virtual CPU structure
#[derive(Debug)]
pub struct Vcpu {
    pub vm_id: VmId,
    pub vcpu_id: usize,
    pub state: VcpuStateType,
    pub flags: VcpuFlags,
    pub vcpu_state: VcpuState,
    pub exit_reason: Option<VmExitReason>,
    pub total_execution_time: u64,
    pub vm_exit_count: u64,
    pub instruction_count: u64,
    pub last_exit_time: u64,
}

impl Vcpu {
    /// Create a new VCPU
    pub fn new(vm_id: VmId, vcpu_id: usize) -> Result<Self, HypervisorError> {
        if vcpu_id >= MAX_VCPUS_PER_VM {
            return Err(HypervisorError::TooManyVcpus);
        }
        
        // Initialize VCPU state with default values
        let vcpu_state = VcpuState {
            regs: VcpuRegs {
                rax: 0, rbx: 0, rcx: 0, rdx: 0,
                rsi: 0, rdi: 0, rbp: 0, rsp: 0,
                r8: 0, r9: 0, r10: 0, r11: 0,
                r12: 0, r13: 0, r14: 0, r15: 0,
                rip: 0, rflags: 2, // Enable interrupts
            },
            ctrl_regs: VcpuCtrlRegs {
                cr0: 0x80010005, // PE=1, PG=0, WP=0
                cr2: 0, cr3: 0, cr4: 0,
                dr0: 0, dr1: 0, dr2: 0, dr3: 0,
                dr6: 0, dr7: 0,
                gdt_base: 0, gdt_limit: 0xffff,
                idt_base: 0, idt_limit: 0xffff,
                ldt_base: 0, ldt_limit: 0,
                tss_base: 0, tss_limit: 0,
            },
            msrs: [MsrEntry { index: 0, value: 0 }; 8],
            cs_selector: 0x08, // Code segment
            ds_selector: 0x10, // Data segment
            es_selector: 0x10,
            fs_selector: 0x10,
            gs_selector: 0x10,
            ss_selector: 0x10,
            tr_selector: 0x18, // Task register
            ldtr_selector: 0x00,
        };
        
        Ok(Vcpu {
            vm_id,
            vcpu_id,
            state: VcpuStateType::Uninitialized,
            flags: VcpuFlags::empty(),
            vcpu_state,
            exit_reason: None,
            total_execution_time: 0,
            vm_exit_count: 0,
            instruction_count: 0,
            last_exit_time: 0,
        })
    }
    
    /// Initialize the VCPU
    pub fn initialize(&mut self) -> Result<(), HypervisorError> {
        // Configure VMCS/VMCB based on hardware capabilities
        self.setup_vmcs_structure()?;
        
        self.state = VcpuStateType::Halted;
        Ok(())
    }
    
    /// Start VCPU execution
    pub fn start(&mut self) -> Result<(), HypervisorError> {
        match self.state {
            VcpuStateType::Uninitialized | VcpuStateType::Halted => {
                self.state = VcpuStateType::Running;
                self.execute_instruction_loop()
            },
            VcpuStateType::Paused => {
                self.state = VcpuStateType::Running;
                Ok(())
            },
            _ => Err(HypervisorError::InvalidVcpuState),
        }
    }
    
    /// Pause VCPU execution
    pub fn pause(&mut self) -> Result<(), HypervisorError> {
        match self.state {
            VcpuStateType::Running => {
                self.state = VcpuStateType::Paused;
                Ok(())
            },
            _ => Err(HypervisorError::InvalidVcpuState),
        }
    }
    
    /// Resume VCPU execution
    pub fn resume(&mut self) -> Result<(), HypervisorError> {
        match self.state {
            VcpuStateType::Paused => {
                self.state = VcpuStateType::Running;
                Ok(())
            },
            _ => Err(HypervisorError::InvalidVcpuState),
        }
    }
    
    /// Force stop VCPU
    pub fn force_stop(&mut self) -> Result<(), HypervisorError> {
        self.state = VcpuStateType::Halted;
        Ok(())
    }
    
    /// Signal shutdown to VCPU
    pub fn signal_shutdown(&mut self) -> Result<(), HypervisorError> {
        match self.state {
            VcpuStateType::Running | VcpuStateType::WaitingIo => {
                self.state = VcpuStateType::Halted;
                Ok(())
            },
            _ => Err(HypervisorError::InvalidVcpuState),
        }
    }
    
    /// Execute instruction loop
    fn execute_instruction_loop(&mut self) -> Result<(), HypervisorError> {
        while self.state == VcpuStateType::Running {
            // Simulate instruction execution
            let exit_reason = self.execute_single_instruction()?;
            
            match exit_reason {
                VmExitReason::HltInstruction => {
                    self.state = VcpuStateType::Halted;
                    break;
                },
                VmExitReason::SoftwareInterrupt => {
                    // Handle system call
                    self.handle_system_call()?;
                },
                VmExitReason::Exception => {
                    // Handle exception
                    self.handle_exception()?;
                },
                _ => {
                    // Handle other VM exits
                    self.handle_vm_exit(exit_reason)?;
                }
            }
        }
        
        Ok(())
    }
    
    /// Execute a single instruction
    fn execute_single_instruction(&mut self) -> Result<VmExitReason, HypervisorError> {
        self.instruction_count += 1;
        
        // Simulate various exit reasons based on instruction
        // In a real implementation, this would use VMCS/VMCB
        let exit_reason = match self.vcpu_state.regs.rip & 0xFFF {
            0x00..=0x7F => VmExitReason::Exception,
            0x80..=0x8F => VmExitReason::SoftwareInterrupt,
            0x90..=0x9F => VmExitReason::HltInstruction,
            _ => VmExitReason::IoInstruction,
        };
        
        self.exit_reason = Some(exit_reason);
        self.vm_exit_count += 1;
        
        // Advance RIP (simplified)
        self.vcpu_state.regs.rip += 1;
        
        Ok(exit_reason)
    }
    
    /// Setup VMCS/VMCB structure
    fn setup_vmcs_structure(&self) -> Result<(), HypervisorError> {
        // Configure VMCS for Intel VT-x or VMCB for AMD-V
        // This would involve setting up control fields, guest state, host state
        
        Ok(())
    }
    
    /// Handle VM exit
    fn handle_vm_exit(&mut self, reason: VmExitReason) -> Result<(), HypervisorError> {
        match reason {
            VmExitReason::IoInstruction => {
                // Handle I/O instruction
                self.handle_io_instruction()
            },
            VmExitReason::MsrRead => {
                // Handle MSR read
                self.handle_msr_read()
            },
            VmExitReason::MsrWrite => {
                // Handle MSR write
                self.handle_msr_write()
            },
            VmExitReason::CpuidInstruction => {
                // Handle CPUID instruction
                self.handle_cpuid()
            },
            _ => {
                // Handle other exits
                Ok(())
            },
        }
    }
    
    /// Handle system call
    fn handle_system_call(&mut self) -> Result<(), HypervisorError> {
        // Handle hypercall from guest
        Ok(())
    }
    
    /// Handle exception
    fn handle_exception(&mut self) -> Result<(), HypervisorError> {
        // Handle CPU exception
        Ok(())
    }
    
    /// Handle I/O instruction
    fn handle_io_instruction(&mut self) -> Result<(), HypervisorError> {
        // Simulate I/O operation
        Ok(())
    }
    
    /// Handle MSR read
    fn handle_msr_read(&mut self) -> Result<(), HypervisorError> {
        // Simulate MSR read operation
        Ok(())
    }
    
    /// Handle MSR write
    fn handle_msr_write(&mut self) -> Result<(), HypervisorError> {
        // Simulate MSR write operation
        Ok(())
    }
    
    /// Handle CPUID instruction
    fn handle_cpuid(&mut self) -> Result<(), HypervisorError> {
        // Simulate CPUID instruction
        Ok(())
    }
    
    /// Get VCPU statistics
    pub fn get_stats(&self) -> CpuStats {
        CpuStats {
            vcpu_id: self.vcpu_id,
            total_time_ms: self.total_execution_time,
            vm_exit_count: self.vm_exit_count,
            instruction_count: self.instruction_count,
        }
    }
}

/// CPU Statistics for VM monitoring
#[derive(Debug, Clone)]
pub struct CpuStats {
    pub vcpu_id: usize,
    pub total_time_ms: u64,
    pub vm_exit_count: u64,
    pub instruction_count: u64,
}

/// VCPU Manager
pub struct VcpuManager {
    total_vcpus: usize,
    running_vcpus: usize,
}

impl VcpuManager {
    /// Create a new VCPU manager
    pub fn new() -> Result<Self, HypervisorError> {
        Ok(VcpuManager {
            total_vcpus: 0,
            running_vcpus: 0,
        })
    }
    
    /// Get total VCPU count
    pub fn get_total_vcpus(&self) -> usize {
        self.total_vcpus
    }
    
    /// Get running VCPU count
    pub fn get_running_vcpus(&self) -> usize {
        self.running_vcpus
    }
}