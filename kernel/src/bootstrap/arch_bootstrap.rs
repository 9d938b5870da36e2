//! Architecture-Specific Bootstrap
//! 
//! This module provides architecture-specific initialization routines
//! for different processor architectures (x86_64, ARM64, RISC-V 64).

use crate::bootstrap::{BootstrapContext, BootstrapResult};
use crate::{ArchType, KernelError};
use crate::log::{info, warn, error};

/// Initialize interrupts for the current architecture
pub fn init_interrupts(context: &BootstrapContext) -> BootstrapResult<()> {
    match context.config.architecture {
        ArchType::X86_64 => init_x86_64_interrupts(context),
        ArchType::AArch64 => init_aarch64_interrupts(context),
        ArchType::Riscv64 => init_riscv64_interrupts(context),
        ArchType::Unknown => Err(KernelError::UnsupportedArchitecture),
    }
}

/// Architecture-specific initialization
pub fn architecture_specific_init(context: &BootstrapContext) -> BootstrapResult<()> {
    match context.config.architecture {
        ArchType::X86_64 => init_x86_64_specific(context),
        ArchType::AArch64 => init_aarch64_specific(context),
        ArchType::Riscv64 => init_riscv64_specific(context),
        ArchType::Unknown => Err(KernelError::UnsupportedArchitecture),
    }
}

/// Initialize x86_64 interrupt handling
fn init_x86_64_interrupts(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing x86_64 interrupt handling...");
    
    // Load IDT (Interrupt Descriptor Table)
    setup_x86_64_idt()?;
    
    // Initialize PIC (Programmable Interrupt Controller)
    setup_x86_64_pic()?;
    
    // Setup system timer
    setup_x86_64_timer()?;
    
    // Enable interrupts
    unsafe {
        core::arch::asm!("sti");
    }
    
    info!("x86_64 interrupt handling initialized");
    Ok(())
}

/// Setup x86_64 IDT
fn setup_x86_64_idt() -> BootstrapResult<()> {
    info!("Setting up x86_64 IDT...");
    
    // IDT entry structure (64-bit)
    #[repr(C)]
    struct IdtEntry {
        offset_low: u16,
        selector: u16,
        ist: u8,
        type_attr: u8,
        offset_mid: u16,
        offset_high: u32,
        zero: u32,
    }
    
    // Setup interrupt handlers
    // This is a simplified version - real implementation would have proper handlers
    
    let idt_entries = [
        // Exception handlers (0-31)
        create_idt_entry(x86_64_exception_handler_0),
        create_idt_entry(x86_64_exception_handler_1),
        create_idt_entry(x86_64_exception_handler_2),
        // ... more entries
    ];
    
    // Load IDT register
    unsafe {
        let idt_ptr = core::mem::transmute::<&[IdtEntry; 32], &[u8; 32 * 16]>(&idt_entries);
        
        core::arch::asm!(
            "lidt [{}]",
            in(reg) idt_ptr.as_ptr(),
        );
    }
    
    Ok(())
}

/// Create x86_64 IDT entry
fn create_idt_entry(handler: unsafe extern "C" fn()) -> [u8; 16] {
    let handler_addr = handler as usize;
    
    [
        (handler_addr & 0xFFFF) as u8,
        ((handler_addr >> 16) & 0xFF) as u8,
        ((handler_addr >> 24) & 0xFF) as u8,
        // ... more fields
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ]
}

/// Setup x86_64 PIC
fn setup_x86_64_pic() -> BootstrapResult<()> {
    info!("Setting up x86_64 PIC...");
    
    // Initialize PIC (8259A)
    unsafe {
        // Master PIC command port
        let master_cmd = 0x20;
        let master_data = 0x21;
        let slave_cmd = 0xA0;
        let slave_data = 0xA1;
        
        // ICW1 - Initialize
        core::arch::asm!("out dx, al", in("dx") master_cmd, in("al") 0x11);
        core::arch::asm!("out dx, al", in("dx") slave_cmd, in("al") 0x11);
        
        // ICW2 - IRQ base (0x20 for master, 0x28 for slave)
        core::arch::asm!("out dx, al", in("dx") master_data, in("al") 0x20);
        core::arch::asm!("out dx, al", in("dx") slave_data, in("al") 0x28);
        
        // ICW3 - IRQ cascade
        core::arch::asm!("out dx, al", in("dx") master_data, in("al") 0x04);
        core::arch::asm!("out dx, al", in("dx") slave_data, in("al") 0x02);
        
        // ICW4 - 8086/88 mode
        core::arch::asm!("out dx, al", in("dx") master_data, in("al") 0x01);
        core::arch::asm!("out dx, al", in("dx") slave_data, in("al") 0x01);
        
        // Disable all interrupts except IRQ0 (timer)
        core::arch::asm!("out dx, al", in("dx") master_data, in("al") 0xFE);
        core::arch::asm!("out dx, al", in("dx") slave_data, in("al") 0xFF);
    }
    
    Ok(())
}

/// Setup x86_64 system timer
fn setup_x86_64_timer() -> BootstrapResult<()> {
    info!("Setting up x86_64 system timer...");
    
    // Program PIT (Programmable Interval Timer)
    unsafe {
        let pit_cmd = 0x43;
        let pit_data = 0x40;
        
        // Set timer to 100Hz (approximately)
        let divisor = 1193182 / 100;
        
        // Channel 0, LSB/MSB mode
        core::arch::asm!("out dx, al", in("dx") pit_cmd, in("al") 0x36);
        core::arch::asm!("out dx, al", in("dx") pit_data, in("al") (divisor & 0xFF) as u8);
        core::arch::asm!("out dx, al", in("dx") pit_data, in("al") ((divisor >> 8) & 0xFF) as u8);
    }
    
    Ok(())
}

/// x86_64 exception handlers
unsafe extern "C" fn x86_64_exception_handler_0() {
    error!("Division by zero exception (#DE)");
    loop {}
}

unsafe extern "C" fn x86_64_exception_handler_1() {
    error!("Debug exception (#DB)");
    loop {}
}

unsafe extern "C" fn x86_64_exception_handler_2() {
    error!("Non-maskable interrupt (#NMI)");
    loop {}
}

/// Initialize ARM64 interrupt handling
fn init_aarch64_interrupts(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing ARM64 interrupt handling...");
    
    // Setup GIC (Generic Interrupt Controller)
    setup_aarch64_gic()?;
    
    // Setup system timer
    setup_aarch64_timer()?;
    
    // Enable interrupts
    enable_aarch64_interrupts();
    
    info!("ARM64 interrupt handling initialized");
    Ok(())
}

/// Setup ARM64 GIC
fn setup_aarch64_gic() -> BootstrapResult<()> {
    info!("Setting up ARM64 GIC...");
    
    // GICv3 setup would go here
    // This includes:
    // - Initializing redistributor
    // - Setting up interrupt routing
    // - Configuring priority handling
    
    Ok(())
}

/// Setup ARM64 system timer
fn setup_aarch64_timer() -> BootstrapResult<()> {
    info!("Setting up ARM64 system timer...");
    
    // ARM64 system timer setup
    // This would configure the generic timer
    
    Ok(())
}

/// Enable ARM64 interrupts
fn enable_aarch64_interrupts() {
    unsafe {
        // Enable interrupts in PSTATE
        core::arch::asm!("msr daifclr, #2");
    }
}

/// Initialize RISC-V interrupt handling
fn init_riscv64_interrupts(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing RISC-V interrupt handling...");
    
    // Setup CLINT (Core Local Interruptor)
    setup_riscv64_clint()?;
    
    // Setup PLIC (Platform Level Interrupt Controller)
    setup_riscv64_plic()?;
    
    // Setup machine timer
    setup_riscv64_timer()?;
    
    // Enable interrupts
    enable_riscv64_interrupts();
    
    info!("RISC-V interrupt handling initialized");
    Ok(())
}

/// Setup RISC-V CLINT
fn setup_riscv64_clint() -> BootstrapResult<()> {
    info!("Setting up RISC-V CLINT...");
    
    // CLINT setup for RISC-V
    // This includes timer and software interrupts
    
    Ok(())
}

/// Setup RISC-V PLIC
fn setup_riscv64_plic() -> BootstrapResult<()> {
    info!("Setting up RISC-V PLIC...");
    
    // PLIC setup for external interrupts
    // This includes interrupt routing and priority
    
    Ok(())
}

/// Setup RISC-V machine timer
fn setup_riscv64_timer() -> BootstrapResult<()> {
    info!("Setting up RISC-V machine timer...");
    
    // RISC-V machine timer setup
    
    Ok(())
}

/// Enable RISC-V interrupts
fn enable_riscv64_interrupts() {
    unsafe {
        // Enable machine interrupts in mstatus
        let mut mstatus: usize;
        core::arch::asm!("csrr {}, mstatus", out(reg) mstatus);
        mstatus |= 1 << 3; // MIE bit
        core::arch::asm!("csrw mstatus, {}", in(reg) mstatus);
    }
}

/// Initialize x86_64 specific features
fn init_x86_64_specific(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing x86_64 specific features...");
    
    // Enable PAE (Physical Address Extension)
    enable_x86_64_pae()?;
    
    // Enable long mode
    enable_x86_64_long_mode()?;
    
    // Setup page tables
    setup_x86_64_page_tables()?;
    
    // Initialize CPU features
    init_x86_64_features()?;
    
    Ok(())
}

/// Enable x86_64 PAE
fn enable_x86_64_pae() -> BootstrapResult<()> {
    info!("Enabling x86_64 PAE...");
    
    unsafe {
        // Set PAE bit in CR4
        let mut cr4: usize;
        core::arch::asm!("mov {}, cr4", out(reg) cr4);
        cr4 |= 1 << 5; // PAE bit
        core::arch::asm!("mov cr4, {}", in(reg) cr4);
    }
    
    Ok(())
}

/// Enable x86_64 long mode
fn enable_x86_64_long_mode() -> BootstrapResult<()> {
    info!("Enabling x86_64 long mode...");
    
    // Long mode is already enabled by the bootloader
    // This function would verify long mode capabilities
    
    Ok(())
}

/// Setup x86_64 page tables
fn setup_x86_64_page_tables() -> BootstrapResult<()> {
    info!("Setting up x86_64 page tables...");
    
    // This would setup 4-level page tables with identity mapping
    
    Ok(())
}

/// Initialize x86_64 CPU features
fn init_x86_64_features() -> BootstrapResult<()> {
    info!("Initializing x86_64 CPU features...");
    
    // Enable various CPU features based on CPUID
    // - SSE/SSE2/AVX
    // - NX bit support
    // - TSC support
    
    Ok(())
}

/// Initialize ARM64 specific features
fn init_aarch64_specific(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing ARM64 specific features...");
    
    // Setup EL (Exception Level) transitions
    setup_aarch64_exception_levels()?;
    
    // Initialize MMU
    init_aarch64_mmu()?;
    
    // Setup caching
    init_aarch64_caching()?;
    
    Ok(())
}

/// Setup ARM64 exception levels
fn setup_aarch64_exception_levels() -> BootstrapResult<()> {
    info!("Setting up ARM64 exception levels...");
    
    // EL3 -> EL2 -> EL1 transition
    
    Ok(())
}

/// Initialize ARM64 MMU
fn init_aarch64_mmu() -> BootstrapResult<()> {
    info!("Initializing ARM64 MMU...");
    
    // Setup translation tables for EL1
    // Enable MMU with appropriate mappings
    
    Ok(())
}

/// Initialize ARM64 caching
fn init_aarch64_caching() -> BootstrapResult<()> {
    info!("Initializing ARM64 caching...");
    
    // Configure cache attributes and enable caching
    
    Ok(())
}

/// Initialize RISC-V specific features
fn init_riscv64_specific(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing RISC-V specific features...");
    
    // Setup Sv39/Sv48 paging
    setup_riscv64_paging()?;
    
    // Initialize PMP (Physical Memory Protection)
    init_riscv64_pmp()?;
    
    // Enable RISC-V extensions
    enable_riscv64_extensions()?;
    
    Ok(())
}

/// Setup RISC-V paging
fn setup_riscv64_paging() -> BootstrapResult<()> {
    info!("Setting up RISC-V paging...");
    
    // Setup Sv39 or Sv48 page tables
    // Configure SATP register
    
    Ok(())
}

/// Initialize RISC-V PMP
fn init_riscv64_pmp() -> BootstrapResult<()> {
    info!("Initializing RISC-V PMP...");
    
    // Configure physical memory protection
    
    Ok(())
}

/// Enable RISC-V extensions
fn enable_riscv64_extensions() -> BootstrapResult<()> {
    info!("Enabling RISC-V extensions...");
    
    // Enable various RISC-V extensions as available
    // - M (multiplication)
    // - A (atomic operations)
    // - F (single precision floating point)
    // - D (double precision floating point)
    
    Ok(())
}