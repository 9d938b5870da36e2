//! ARM64 (AArch64) Architecture-Specific Module
//! 
//! This module provides ARM64 specific functionality including exception handling
//! and system call support for ARMv8-A architecture.

use crate::log::{info, warn, error};
use crate::KernelError;
use crate::ArchType;

/// ARM64 exception handling initialization
pub fn init() -> Result<(), KernelError> {
    info!("Initializing ARM64 architecture support...");
    
    // Initialize interrupt system
    crate::arch::interrupts::init_interrupt_system(ArchType::AArch64)?;
    
    // Initialize ARM64 mobile and tablet support
    mobile::init_mobile_support()?;
    
    info!("ARM64 architecture initialization complete");
    Ok(())
}

/// ARM64 exception vectors table
#[repr(C)]
pub struct ExceptionVectors {
    pub current_el0_synchronous: [u8; 0x80],      // EL0 with SP0
    pub current_el0_irq: [u8; 0x80],             // EL0 with SP0, IRQ
    pub current_el0_fiq: [u8; 0x80],             // EL0 with SP0, FIQ
    pub current_el0_serror: [u8; 0x80],          // EL0 with SP0, SError
    
    pub current_el_synchronous: [u8; 0x80],      // EL1 with SP1
    pub current_el_irq: [u8; 0x80],              // EL1 with SP1, IRQ
    pub current_el_fiq: [u8; 0x80],              // EL1 with SP1, FIQ
    pub current_el_serror: [u8; 0x80],           // EL1 with SP1, SError
    
    pub lower_el_aarch64_synchronous: [u8; 0x80], // Lower EL AArch64
    pub lower_el_aarch64_irq: [u8; 0x80],         // Lower EL AArch64, IRQ
    pub lower_el_aarch64_fiq: [u8; 0x80],         // Lower EL AArch64, FIQ
    pub lower_el_aarch64_serror: [u8; 0x80],      // Lower EL AArch64, SError
    
    pub lower_el_aarch32_synchronous: [u8; 0x80], // Lower EL AArch32
    pub lower_el_aarch32_irq: [u8; 0x80],         // Lower EL AArch32, IRQ
    pub lower_el_aarch32_fiq: [u8; 0x80],         // Lower EL AArch32, FIQ
    pub lower_el_aarch32_serror: [u8; 0x80],      // Lower EL AArch32, SError
}

/// ARM64 system register access
pub mod registers {
    /// Read System Register
    pub fn mrs(register: u32) -> u64 {
        let mut value: u64;
        unsafe {
            match register {
                0xC000_0000 => core::arch::asm!("mrs {}, sctlr_el1", out(reg) value), // SCTLR_EL1
                0x5A01_0002 => core::arch::asm!("mrs {}, tcr_el1", out(reg) value),   // TCR_EL1
                0x5A01_0003 => core::arch::asm!("mrs {}, ttbr0_el1", out(reg) value), // TTBR0_EL1
                0x5A01_0004 => core::arch::asm!("mrs {}, ttbr1_el1", out(reg) value), // TTBR1_EL1
                0xC010_0000 => core::arch::asm!("mrs {}, mair_el1", out(reg) value),  // MAIR_EL1
                0xC090_0000 => core::arch::asm!("mrs {}, vbar_el1", out(reg) value),  // VBAR_EL1
                0xC000_0008 => core::arch::asm!("mrs {}, actlr_el1", out(reg) value), // ACTLR_EL1
                _ => {
                    warn!("Unknown system register: {:#x}", register);
                    0
                }
            }
        }
        value
    }
    
    /// Write System Register
    pub fn msr(register: u32, value: u64) {
        unsafe {
            match register {
                0xC000_0000 => core::arch::asm!("msr sctlr_el1, {}", in(reg) value), // SCTLR_EL1
                0x5A01_0002 => core::arch::asm!("msr tcr_el1, {}", in(reg) value),   // TCR_EL1
                0x5A01_0003 => core::arch::asm!("msr ttbr0_el1, {}", in(reg) value), // TTBR0_EL1
                0x5A01_0004 => core::arch::asm!("msr ttbr1_el1, {}", in(reg) value), // TTBR1_EL1
                0xC010_0000 => core::arch::asm!("msr mair_el1, {}", in(reg) value),  // MAIR_EL1
                0xC090_0000 => core::arch::asm!("msr vbar_el1, {}", in(reg) value),  // VBAR_EL1
                0xC000_0008 => core::arch::asm!("msr actlr_el1, {}", in(reg) value), // ACTLR_EL1
                _ => warn!("Unknown system register: {:#x}", register),
            }
        }
    }
    
    /// Get current exception level
    pub fn get_current_el() -> u8 {
        let mut el: u64;
        unsafe {
            core::arch::asm!("mrs {}, currentel", out(reg) el);
        }
        (el >> 2) as u8
    }
    
    /// Get current privilege level
    pub fn get_cpl() -> u8 {
        let el = get_current_el();
        match el {
            0 => 3, // EL0 = User mode (CPL 3)
            1 | 2 => 0, // EL1/EL2 = Kernel mode (CPL 0)
            3 => 0, // EL3 = Kernel mode (CPL 0)
            _ => 0,
        }
    }
}

/// ARM64 interrupt handling
pub mod interrupt {
    use super::*;
    use crate::arch::interrupts::*;
    
    /// Initialize exception level handlers
    pub fn init_exception_level_handlers() -> InterruptResult<()> {
        info!("Initializing ARM64 exception level handlers...");
        
        // Set up exception vector table
        setup_exception_vectors()?;
        
        // Configure system registers
        configure_system_registers()?;
        
        info!("ARM64 exception level handlers initialized");
        Ok(())
    }
    
    /// Set up exception vectors
    fn setup_exception_vectors() -> InterruptResult<()> {
        // Allocate space for exception vector table
        // In a real implementation, this would set up proper exception handlers
        // For now, we'll just configure the VBAR_EL1 register
        
        let vector_table_addr = &exception_vector_stub as usize;
        registers::msr(0xC090_0000, vector_table_addr as u64); // VBAR_EL1
        
        Ok(())
    }
    
    /// Configure system registers for exception handling
    fn configure_system_registers() -> Result<(), KernelError> {
        // Configure SCTLR_EL1 (System Control Register)
        let mut sctlr = registers::mrs(0xC000_0000);
        
        // Enable MMU and cache
        sctlr |= (1 << 0);   // M (MMU enable)
        sctlr |= (1 << 2);   // C (Cache enable)
        sctlr |= (1 << 3);   // SA (Stack alignment check)
        sctlr |= (1 << 4);   // SA0 (Stack alignment check EL0)
        sctlr |= (1 << 11);  // UCT (EL0 register access)
        sctlr |= (1 << 26);  // DZE (EL0 DC ZVA instruction)
        sctlr |= (1 << 27);  // UCI (EL0 DC instruction)
        
        registers::msr(0xC000_0000, sctlr);
        
        // Configure TCR_EL1 (Translation Control Register)
        let mut tcr = registers::mrs(0x5A01_0002);
        
        // Set T0SZ for 48-bit VA space
        tcr = (tcr & !((0x3F) << 0)) | (16 << 0); // T0SZ = 16 (48-bit)
        tcr = (tcr & !(0xF << 10)) | (0x2 << 10); // IPS = 48-bit PA
        tcr |= (1 << 7);  // EPD0 (TTBR0 EL1 only)
        
        registers::msr(0x5A01_0002, tcr);
        
        Ok(())
    }
    
    /// Set up system call handler
    pub fn setup_system_call_handler() -> InterruptResult<()> {
        info!("Setting up ARM64 system call handler...");
        
        // Configure SVC instruction to generate system call exception
        // This is handled automatically by the CPU
        
        info!("ARM64 system call handler configured");
        Ok(())
    }
    
    /// Exception vector stub
    #[no_mangle]
    extern "C" fn exception_vector_stub() {
        // This would contain the actual exception handling code
        // For now, just loop
        loop {
            unsafe { core::arch::asm!("wfi"); }
        }
    }
}

/// ARM64 Generic Interrupt Controller (GIC)
pub mod gic {
    use super::*;
    use crate::arch::interrupts::InterruptResult;
    
    /// Initialize GIC
    pub fn init_gic() -> InterruptResult<()> {
        info!("Initializing ARM64 GIC...");
        
        // Detect GIC version and initialize accordingly
        let gic_version = detect_gic_version();
        
        match gic_version {
            2 => init_gicv2(),
            3 => init_gicv3(),
            _ => {
                warn!("Unsupported GIC version: {}", gic_version);
                Ok(())
            }
        }
    }
    
    /// Detect GIC version
    fn detect_gic_version() -> u8 {
        // Read GIC version from CPU interface
        // For now, return version 2 as default
        2
    }
    
    /// Initialize GICv2
    fn init_gicv2() -> InterruptResult<()> {
        info!("Initializing GICv2...");
        
        // Initialize CPU interface
        // Initialize distributor
        // Configure interrupt priorities
        
        Ok(())
    }
    
    /// Initialize GICv3
    fn init_gicv3() -> InterruptResult<()> {
        info!("Initializing GICv3...");
        
        // Initialize redistributor
        // Initialize CPU interface
        // Configure interrupt routing
        
        Ok(())
    }
}

/// ARM64 specific CPU information
pub fn get_cpu_info() -> crate::arch::CpuInfo {
    crate::arch::CpuInfo {
        vendor: "ARM",
        model: "ARMv8-A",
        family: 8,
        model_id: 0,
        stepping: 0,
        frequency_mhz: 2400,
        cores: 4,
        threads_per_core: 1,
    }
}

/// ARM64 specific system configuration
pub fn get_system_config() -> crate::arch::SystemConfig {
    crate::arch::SystemConfig {
        page_size: 4096,
        max_phys_addr: 0xFFFF_FFFF_FFFF, // 48-bit PA space
        max_virt_addr: 0xFFFF_FFFF_FFFF, // 48-bit VA space
        pointer_size: 8,
        endianness: crate::arch::Endianness::Little,
        interrupt_controller: crate::arch::InterruptController::Gic,
        mobile_optimized: true,
        low_power_mode: false,
        touch_enabled: false,
        gpu_accelerated: false,
    }
}

/// ARM64 specific subsystem initialization
pub mod subsystem {
    use super::*;
    
    /// Initialize performance monitoring
    pub fn init_performance_monitoring() -> Result<(), KernelError> {
        info!("Initializing ARM64 performance monitoring...");
        
        // Enable ARMv8 performance counters
        
        Ok(())
    }
    
    /// Initialize debugging support
    pub fn init_debugging() -> Result<(), KernelError> {
        info!("Initializing ARM64 debugging support...");
        
        // Enable ARMv8 debugging features
        
        Ok(())
    }
}