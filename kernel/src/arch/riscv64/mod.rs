//! RISC-V64 Architecture-Specific Module with IoT Support
//! 
//! This module provides RISC-V64 specific functionality including exception handling,
//! system call support, and comprehensive IoT device support for RV64GC architecture.

use crate::log::{info, warn, error};
use crate::KernelError;
use crate::ArchType;

// IoT modules
pub mod iot;
pub mod iot_drivers;
pub mod iot_bootloader;
pub mod iot_networking;
pub mod iot_example;
pub mod iot_build;

/// RISC-V64 exception handling initialization
pub fn init() -> Result<(), KernelError> {
    info!("Initializing RISC-V64 architecture support...");
    
    // Initialize interrupt system
    crate::arch::interrupts::init_interrupt_system(ArchType::Riscv64)?;
    
    info!("RISC-V64 architecture initialization complete");
    Ok(())
}

/// RISC-V interrupt types
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum InterruptType {
    UserSoftware = 0,
    SupervisorSoftware = 1,
    MachineSoftware = 3,
    UserTimer = 4,
    SupervisorTimer = 5,
    MachineTimer = 7,
    UserExternal = 8,
    SupervisorExternal = 9,
    MachineExternal = 11,
}

/// RISC-V exception types
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum ExceptionType {
    InstructionAddressMisaligned = 0,
    InstructionAccessFault = 1,
    IllegalInstruction = 2,
    Breakpoint = 3,
    LoadAddressMisaligned = 4,
    LoadAccessFault = 5,
    StoreAddressMisaligned = 6,
    StoreAccessFault = 7,
    UserEnvironmentCall = 8,
    SupervisorEnvironmentCall = 9,
    MachineEnvironmentCall = 11,
    InstructionPageFault = 12,
    LoadPageFault = 13,
    StorePageFault = 15,
}

/// RISC-V privilege levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PrivilegeLevel {
    User = 0,
    Supervisor = 1,
    Reserved = 2,
    Machine = 3,
}

/// RISC-V system register access
pub mod registers {
    /// Read CSR (Control and Status Register)
    pub fn csrr(register: u32) -> u64 {
        let mut value: u64;
        unsafe {
            core::arch::asm!("csrr {}, {}", out(reg) value, in(reg) register);
        }
        value
    }
    
    /// Write CSR
    pub fn csrw(register: u32, value: u64) {
        unsafe {
            core::arch::asm!("csrw {}, {}", in(reg) register, in(reg) value);
        }
    }
    
    /// Set bits in CSR
    pub fn csrs(register: u32, mask: u64) {
        unsafe {
            core::arch::asm!("csrs {}, {}", in(reg) register, in(reg) mask);
        }
    }
    
    /// Clear bits in CSR
    pub fn csrc(register: u32, mask: u64) {
        unsafe {
            core::arch::asm!("csrc {}, {}", in(reg) register, in(reg) mask);
        }
    }
    
    /// Get current privilege level
    pub fn get_privilege_level() -> PrivilegeLevel {
        let status = csrr(0x100); // CSR: mstatus
        match (status >> 11) & 0x3 {
            0 => PrivilegeLevel::User,
            1 => PrivilegeLevel::Supervisor,
            2 => PrivilegeLevel::Reserved,
            3 => PrivilegeLevel::Machine,
            _ => PrivilegeLevel::Machine,
        }
    }
    
    /// Enable interrupts
    pub fn enable_interrupts() {
        csrs(0x100, (1 << 3) | (1 << 7) | (1 << 11)); // MIE, SIE, UIE in mstatus
    }
    
    /// Disable interrupts
    pub fn disable_interrupts() {
        csrc(0x100, (1 << 3) | (1 << 7) | (1 << 11)); // Clear MIE, SIE, UIE in mstatus
    }
    
    /// Get current time
    pub fn get_time() -> u64 {
        csrr(0xC01) // CSR: time
    }
    
    /// Get cycle count
    pub fn get_cycle() -> u64 {
        csrr(0xC00) // CSR: cycle
    }
    
    /// Get instruction count
    pub fn get_instret() -> u64 {
        csrr(0xC02) // CSR: instret
    }
}

/// RISC-V interrupt handling
pub mod interrupt {
    use super::*;
    use crate::arch::interrupts::*;
    
    /// Initialize exception handlers
    pub fn init_exception_handlers() -> InterruptResult<()> {
        info!("Initializing RISC-V exception handlers...");
        
        // Set up trap vector
        setup_trap_vector()?;
        
        // Configure interrupt enable bits
        configure_interrupt_enabling()?;
        
        info!("RISC-V exception handlers initialized");
        Ok(())
    }
    
    /// Set up trap vector
    fn setup_trap_vector() -> InterruptResult<()> {
        let trap_vector_addr = &trap_vector_stub as usize;
        registers::csrw(0x5B, trap_vector_addr as u64); // CSR: mtvec
        
        Ok(())
    }
    
    /// Configure interrupt enabling
    fn configure_interrupt_enabling() -> Result<(), KernelError> {
        // Enable timer interrupt
        registers::csrw(0x304, 0x1 << 7); // CSR: mie (MTIE bit)
        
        // Enable external interrupts
        registers::csrw(0x304, 0x1 << 9); // CSR: mie (MEIE bit)
        
        Ok(())
    }
    
    /// Set up system call handler
    pub fn setup_system_call_handler() -> InterruptResult<()> {
        info!("Setting up RISC-V system call handler...");
        
        // ECALL instruction automatically generates environment call exception
        // We just need to handle it in the trap vector
        
        info!("RISC-V system call handler configured");
        Ok(())
    }
    
    /// Trap vector stub
    #[no_mangle]
    extern "C" fn trap_vector_stub() {
        let mcause = registers::csrr(0x342); // CSR: mcause
        let mepc = registers::csrr(0x341);   // CSR: mepc
        
        handle_trap(mcause, mepc);
    }
    
    /// Handle trap
    fn handle_trap(mcause: u64, mepc: u64) {
        let cause = (mcause >> 32) as u32;
        let code = (mcause & 0xFFFF_FFFF) as u32;
        
        if (mcause >> 63) != 0 {
            // Interrupt
            handle_interrupt(cause as u8);
        } else {
            // Exception
            handle_exception(cause as u8, code, mepc);
        }
    }
    
    /// Handle interrupt
    fn handle_interrupt(interrupt_type: u8) {
        match interrupt_type {
            7 => {
                // Machine timer interrupt
                info!("Machine timer interrupt");
                crate::arch::interrupts::handlers::timer_interrupt_handler();
            }
            11 => {
                // Machine external interrupt
                info!("Machine external interrupt");
                crate::arch::interrupts::handlers::keyboard_interrupt_handler();
            }
            _ => {
                warn!("Unhandled interrupt type: {}", interrupt_type);
            }
        }
        
        // Clear interrupt
        registers::csrw(0x344, 0x1 << 7); // CSR: mip (clear MTIP)
    }
    
    /// Handle exception
    fn handle_exception(exception_type: u8, code: u32, mepc: u64) {
        match exception_type as usize {
            2 => {
                // Illegal instruction
                error!("Illegal instruction at {:#x}", mepc);
            }
            12 => {
                // Instruction page fault
                error!("Instruction page fault at {:#x}", mepc);
                crate::arch::interrupts::handlers::page_fault_handler(
                    mepc as usize, 0, mepc as usize);
            }
            13 => {
                // Load page fault
                error!("Load page fault");
            }
            15 => {
                // Store page fault
                error!("Store page fault");
            }
            11 => {
                // Machine environment call
                handle_system_call();
            }
            _ => {
                warn!("Unhandled exception type: {}", exception_type);
            }
        }
        
        // Increment mepc to next instruction
        registers::csrw(0x341, mepc + 4);
    }
    
    /// Handle system call
    fn handle_system_call() {
        info!("System call received");
        
        // Get system call parameters from registers
        let syscall_number: usize;
        let arg0: usize;
        let arg1: usize;
        let arg2: usize;
        
        unsafe {
            core::arch::asm!(
                "mv {}, a7", // syscall number in a7
                "mv {}, a0", // arg0
                "mv {}, a1", // arg1
                "mv {}, a2", // arg2
                out(reg) syscall_number,
                out(reg) arg0,
                out(reg) arg1,
                out(reg) arg2,
            );
        }
        
        // Dispatch to system call handler
        // This would call the same handler as x86_64
        let result = crate::arch::x86_64::interrupt::handle_system_call(
            syscall_number, arg0, arg1, arg2, 0, 0);
        
        // Set return value in a0
        unsafe {
            core::arch::asm!(
                "mv a0, {}",
                in(reg) result.return_value
            );
        }
    }
}

/// RISC-V Core Local Interruptor (CLINT)
pub mod clint {
    use super::*;
    use crate::arch::interrupts::InterruptResult;
    
    /// Initialize CLINT
    pub fn init_clint() -> InterruptResult<()> {
        info!("Initializing RISC-V CLINT...");
        
        // Set up timer for periodic interrupts
        setup_timer()?;
        
        info!("RISC-V CLINT initialized");
        Ok(())
    }
    
    /// Set up timer
    fn setup_timer() -> Result<(), KernelError> {
        // Get current time
        let current_time = registers::get_time();
        
        // Set timer for next interrupt (1ms from now)
        let next_time = current_time + 100000; // Assuming 100MHz clock
        
        registers::csrw(0x7C4, next_time); // CSR: mtimecmp
        
        Ok(())
    }
}

/// RISC-V Platform Level Interrupt Controller (PLIC)
pub mod plic {
    use super::*;
    use crate::arch::interrupts::InterruptResult;
    
    /// Initialize PLIC
    pub fn init_plic() -> InterruptResult<()> {
        info!("Initializing RISC-V PLIC...");
        
        // Initialize PLIC for external interrupts
        
        info!("RISC-V PLIC initialized");
        Ok(())
    }
    
    /// Enable specific interrupt
    pub fn enable_interrupt(hart: usize, interrupt_id: usize) {
        // This would configure PLIC to route interrupts to specific HART
    }
    
    /// Set interrupt priority
    pub fn set_interrupt_priority(interrupt_id: usize, priority: u32) {
        // Set priority for specific interrupt
    }
    
    /// Complete interrupt
    pub fn complete_interrupt(hart: usize, interrupt_id: usize) {
        // Signal completion of interrupt processing
    }
}

/// RISC-V64 specific CPU information
pub fn get_cpu_info() -> crate::arch::CpuInfo {
    crate::arch::CpuInfo {
        vendor: "RISC-V",
        model: "RV64GC",
        family: 64,
        model_id: 0,
        stepping: 0,
        frequency_mhz: 1000,
        cores: 4,
        threads_per_core: 1,
    }
}

/// RISC-V64 specific system configuration
pub fn get_system_config() -> crate::arch::SystemConfig {
    crate::arch::SystemConfig {
        page_size: 4096,
        max_phys_addr: 0xFFFF_FFFF_FFFF, // 48-bit PA space
        max_virt_addr: 0xFFFF_FFFF_FFFF, // 48-bit VA space
        pointer_size: 8,
        endianness: crate::arch::Endianness::Little,
        interrupt_controller: crate::arch::InterruptController::Clint,
    }
}

/// RISC-V64 specific subsystem initialization
pub mod subsystem {
    use super::*;
    
    /// Initialize performance monitoring
    pub fn init_performance_monitoring() -> Result<(), KernelError> {
        info!("Initializing RISC-V64 performance monitoring...");
        
        // Enable cycle and instruction counters
        registers::csrw(0x320, 0x1); // CSR: mcounteren (enable cycle)
        registers::csrw(0x321, 0x1); // CSR: mcounteren (enable instret)
        
        Ok(())
    }
    
    /// Initialize debugging support
    pub fn init_debugging() -> Result<(), KernelError> {
        info!("Initializing RISC-V64 debugging support...");
        
        // Enable RISC-V debugging features
        
        Ok(())
    }
    
    /// Enable/disable interrupts
    pub fn enable_global_interrupts() {
        registers::enable_interrupts();
    }
    
    pub fn disable_global_interrupts() {
        registers::disable_interrupts();
    }
}

/// IoT-specific initialization
pub mod iot_init {
    use super::*;
    use crate::arch::riscv64::iot::*;
    use crate::arch::riscv64::iot_drivers::*;
    use crate::arch::riscv64::iot_bootloader::*;
    use crate::arch::riscv64::iot_networking::*;
    
    /// Initialize complete IoT subsystem
    pub fn init_iot_system() -> Result<(), KernelError> {
        info!("Initializing complete RISC-V IoT system...");
        
        // Create default IoT configuration
        let iot_config = IoTDeviceConfig {
            device_id: 0x1000,
            device_type: IoTDeviceType::EdgeNode,
            power_mode: PowerMode::Active,
            realtime_priority: RealtimePriority::Normal,
            memory_limit_kb: 1024, // 1MB total memory
            max_power_consumption_mw: 500,
        };
        
        // Initialize IoT subsystem
        init_iot_subsystem(&iot_config)?;
        
        // Initialize IoT device manager with example devices
        let device_manager = create_iot_example_devices();
        
        // Initialize IoT bootloader
        let mut bootloader = create_iot_bootloader("esp32")?;
        bootloader.init()?;
        
        // Initialize networking stack
        let mut networking_stack = create_iot_networking_stack("gateway")?;
        networking_stack.init()?;
        
        info!("Complete RISC-V IoT system initialized successfully");
        info!("Device ID: {:#x}", iot_config.device_id);
        info!("Memory limit: {} KB", iot_config.memory_limit_kb);
        info!("Max power: {} mW", iot_config.max_power_consumption_mw);
        info!("Networking status: {}", networking_stack.get_interface_status());
        
        Ok(())
    }
    
    /// Initialize IoT system for resource-constrained devices
    pub fn init_minimal_iot_system() -> Result<(), KernelError> {
        info!("Initializing minimal RISC-V IoT system for resource-constrained devices...");
        
        // Minimal configuration for microcontrollers
        let minimal_config = IoTDeviceConfig {
            device_id: 0x2000,
            device_type: IoTDeviceType::Sensor,
            power_mode: PowerMode::DeepSleep,
            realtime_priority: RealtimePriority::High,
            memory_limit_kb: 256, // 256KB total memory
            max_power_consumption_mw: 50, // 50mW maximum
        };
        
        // Initialize minimal subsystem
        init_iot_subsystem(&minimal_config)?;
        
        info!("Minimal RISC-V IoT system initialized");
        info!("Optimized for: {} mW power consumption", minimal_config.max_power_consumption_mw);
        
        Ok(())
    }
    
    /// Initialize IoT system with custom configuration
    pub fn init_custom_iot_system(
        device_id: u32,
        device_type: IoTDeviceType,
        memory_limit_kb: u32,
        max_power_mw: u32,
    ) -> Result<(), KernelError> {
        info!("Initializing custom RISC-V IoT system...");
        
        let custom_config = IoTDeviceConfig {
            device_id,
            device_type,
            power_mode: PowerMode::Active,
            realtime_priority: RealtimePriority::Normal,
            memory_limit_kb,
            max_power_consumption_mw: max_power_mw,
        };
        
        init_iot_subsystem(&custom_config)?;
        
        info!("Custom RISC-V IoT system initialized");
        info!("Device ID: {:#x}", device_id);
        info!("Device Type: {:?}", device_type);
        info!("Memory: {} KB", memory_limit_kb);
        info!("Power: {} mW", max_power_mw);
        
        Ok(())
    }
}