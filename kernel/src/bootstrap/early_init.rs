//! Early Bootstrap Initialization
//! 
//! This module handles the earliest stages of kernel initialization,
//! including stack setup, basic hardware detection, and early memory management.

use crate::bootstrap::{BootstrapContext, BootstrapResult, BootstrapConfig};
use crate::{ArchType, BootMethod};
use crate::log::{info, warn, error};

/// Early initialization data
#[derive(Debug)]
pub struct EarlyInitData {
    pub stack_top: u64,
    pub stack_size: usize,
    pub detected_cpus: u32,
    pub boot_cpu: u32,
    pub serial_console: bool,
    pub early_heap: Option<&'static mut [u8]>,
}

/// Perform early initialization
pub fn early_initialization(context: &mut BootstrapContext) -> BootstrapResult<()> {
    info!("Starting early initialization...");
    
    // Validate boot information
    validate_boot_info(&context.boot_info)?;
    
    // Setup early stack
    let early_data = setup_early_stack(&context)?;
    
    // Detect hardware capabilities
    detect_hardware(&context)?;
    
    // Initialize early console
    init_early_console(&context)?;
    
    // Setup early heap
    setup_early_heap(&mut early_data, &context.config)?;
    
    // Setup early interrupts (basic protection)
    setup_early_interrupts(&context)?;
    
    info!("Early initialization complete");
    
    Ok(())
}

/// Validate boot information received from bootloader
fn validate_boot_info(boot_info: &crate::BootInfo) -> BootstrapResult<()> {
    info!("Validating boot information...");
    
    // Check boot time is reasonable
    if boot_info.boot_time == 0 {
        warn!("Boot time is 0, using current timestamp");
    }
    
    // Validate memory map
    if boot_info.memory_map.is_empty() {
        return Err(crate::KernelError::MemoryInitFailed);
    }
    
    info!("Memory map entries: {}", boot_info.memory_map.len());
    
    for (i, entry) in boot_info.memory_map.iter().enumerate() {
        info!("Memory entry {}: base=0x{:x}, size=0x{:x}, type={:?}", 
              i, entry.base, entry.size, entry.entry_type);
    }
    
    Ok(())
}

/// Setup early bootstrap stack
fn setup_early_stack(context: &BootstrapContext) -> BootstrapResult<EarlyInitData> {
    info!("Setting up early bootstrap stack...");
    
    // Architecture-specific stack setup
    let (stack_top, stack_size) = match context.config.architecture {
        ArchType::X86_64 => {
            // Setup 64-bit stack
            setup_x86_64_stack(&context)
        }
        ArchType::AArch64 => {
            // Setup ARM64 stack
            setup_aarch64_stack(&context)
        }
        ArchType::Riscv64 => {
            // Setup RISC-V 64-bit stack
            setup_riscv64_stack(&context)
        }
        ArchType::Unknown => {
            return Err(crate::KernelError::UnsupportedArchitecture);
        }
    }?;
    
    Ok(EarlyInitData {
        stack_top,
        stack_size,
        detected_cpus: 1, // Single CPU for now
        boot_cpu: 0,
        serial_console: true,
        early_heap: None,
    })
}

/// Setup x86_64 specific stack
fn setup_x86_64_stack(context: &BootstrapContext) -> BootstrapResult<(u64, usize)> {
    info!("Setting up x86_64 stack...");
    
    // Find available memory for stack
    let stack_size = 0x10000; // 64KB stack
    
    for entry in &context.boot_info.memory_map {
        if entry.entry_type == crate::MemoryType::Usable && entry.size >= stack_size as u64 {
            let stack_top = entry.base + entry.size;
            info!("Stack allocated at: 0x{:x} (size: 0x{:x})", stack_top - stack_size as u64, stack_size);
            
            // Return stack base (bottom) and size
            return Ok((stack_top, stack_size));
        }
    }
    
    Err(crate::KernelError::MemoryInitFailed)
}

/// Setup ARM64 specific stack
fn setup_aarch64_stack(context: &BootstrapContext) -> BootstrapResult<(u64, usize)> {
    info!("Setting up ARM64 stack...");
    
    // ARM64 typically needs larger stacks due to frame pointer requirements
    let stack_size = 0x20000; // 128KB stack
    
    for entry in &context.boot_info.memory_map {
        if entry.entry_type == crate::MemoryType::Usable && entry.size >= stack_size as u64 {
            let stack_top = entry.base + entry.size;
            info!("ARM64 Stack allocated at: 0x{:x} (size: 0x{:x})", stack_top - stack_size as u64, stack_size);
            
            return Ok((stack_top, stack_size));
        }
    }
    
    Err(crate::KernelError::MemoryInitFailed)
}

/// Setup RISC-V 64-bit stack
fn setup_riscv64_stack(context: &BootstrapContext) -> BootstrapResult<(u64, usize)> {
    info!("Setting up RISC-V 64-bit stack...");
    
    let stack_size = 0x18000; // 96KB stack
    
    for entry in &context.boot_info.memory_map {
        if entry.entry_type == crate::MemoryType::Usable && entry.size >= stack_size as u64 {
            let stack_top = entry.base + entry.size;
            info!("RISC-V Stack allocated at: 0x{:x} (size: 0x{:x})", stack_top - stack_size as u64, stack_size);
            
            return Ok((stack_top, stack_size));
        }
    }
    
    Err(crate::KernelError::MemoryInitFailed)
}

/// Detect hardware capabilities
fn detect_hardware(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Detecting hardware capabilities...");
    
    match context.config.architecture {
        ArchType::X86_64 => {
            detect_x86_64_hardware(context)?;
        }
        ArchType::AArch64 => {
            detect_aarch64_hardware(context)?;
        }
        ArchType::Riscv64 => {
            detect_riscv64_hardware(context)?;
        }
        ArchType::Unknown => {
            return Err(crate::KernelError::UnsupportedArchitecture);
        }
    }
    
    Ok(())
}

/// Detect x86_64 hardware
fn detect_x86_64_hardware(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Detecting x86_64 hardware...");
    
    // Read CPUID for processor information
    unsafe {
        core::arch::asm!(
            "mov eax, 1",
            "cpuid",
            out(reg) _eax,
            out(reg) _ebx,
            out(reg) _ecx,
            out(reg) _edx
        );
    }
    
    // Check for APIC support
    info!("APIC support detection would go here");
    
    Ok(())
}

/// Detect ARM64 hardware
fn detect_aarch64_hardware(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Detecting ARM64 hardware...");
    
    // ARM64-specific hardware detection
    // This would read system registers and check for features
    
    Ok(())
}

/// Detect RISC-V hardware
fn detect_riscv64_hardware(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Detecting RISC-V hardware...");
    
    // RISC-V-specific hardware detection
    // This would check for PMP, Sv39/Sv48 support, etc.
    
    Ok(())
}

/// Initialize early console output
fn init_early_console(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing early console...");
    
    match context.config.boot_method {
        BootMethod::Multiboot2 | BootMethod::BIOS => {
            // Use VGA text mode for early console
            init_vga_console()?;
        }
        BootMethod::UEFI => {
            // Use UEFI console
            init_uefi_console()?;
        }
        BootMethod::Direct => {
            // Minimal console
            init_serial_console()?;
        }
    }
    
    Ok(())
}

/// Initialize VGA text mode console
fn init_vga_console() -> BootstrapResult<()> {
    info!("Initializing VGA console...");
    
    // Clear screen and set cursor position
    unsafe {
        // VGA text mode buffer address
        let vga_buffer = 0xb8000 as *mut u8;
        
        // Clear screen (fill with spaces)
        for i in 0..(80 * 25 * 2) {
            vga_buffer.add(i).write(0x20); // Space character
        }
        
        // Write MultiOS boot message
        let message = b"MultiOS Bootstrap Starting...\r\n";
        for (i, &byte) in message.iter().enumerate() {
            if i < 80 * 25 * 2 {
                vga_buffer.add(i * 2).write(byte);
                vga_buffer.add(i * 2 + 1).write(0x07); // Light gray on black
            }
        }
    }
    
    Ok(())
}

/// Initialize UEFI console
fn init_uefi_console() -> BootstrapResult<()> {
    info!("Using UEFI console for output");
    Ok(())
}

/// Initialize serial console
fn init_serial_console() -> BootstrapResult<()> {
    info!("Initializing serial console...");
    
    // Initialize COM1 serial port for console output
    unsafe {
        // COM1 port addresses
        let com1 = 0x3f8;
        
        // Disable interrupts
        core::arch::asm!("out dx, al", in("dx") com1 + 1, in("al") 0x00);
        
        // Set divisor latch
        core::arch::asm!("out dx, al", in("dx") com1 + 3, in("al") 0x80);
        
        // Set baud rate (115200 / 9600 = 12)
        core::arch::asm!("out dx, al", in("dx") com1 + 0, in("al") 12);
        core::arch::asm!("out dx, al", in("dx") com1 + 1, in("al") 0x00);
        
        // 8N1 mode
        core::arch::asm!("out dx, al", in("dx") com1 + 3, in("al") 0x03);
        
        // Enable FIFO
        core::arch::asm!("out dx, al", in("dx") com1 + 2, in("al") 0xC7);
        
        // Enable interrupts
        core::arch::asm!("out dx, al", in("dx") com1 + 1, in("al") 0x01);
    }
    
    Ok(())
}

/// Setup early heap for bootstrap allocations
fn setup_early_heap(early_data: &mut EarlyInitData, config: &BootstrapConfig) -> BootstrapResult<()> {
    if !config.enable_debug {
        return Ok(());
    }
    
    info!("Setting up early debug heap...");
    
    // Allocate a small heap for early debug allocations
    let heap_size = 0x1000; // 4KB heap
    
    for entry in &early_memory_map() {
        if entry.1 >= heap_size {
            let heap_start = entry.0;
            early_data.early_heap = Some(unsafe { 
                core::slice::from_raw_parts_mut(heap_start as *mut u8, heap_size) 
            });
            info!("Early heap allocated at: 0x{:x}", heap_start);
            break;
        }
    }
    
    Ok(())
}

/// Setup basic interrupt handling for early bootstrap
fn setup_early_interrupts(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Setting up early interrupt protection...");
    
    match context.config.architecture {
        ArchType::X86_64 => {
            // Setup basic IDT with panic handlers
            setup_x86_64_idt()?;
        }
        ArchType::AArch64 => {
            // Setup basic exception handling
            setup_aarch64_exceptions()?;
        }
        ArchType::Riscv64 => {
            // Setup basic trap handling
            setup_riscv64_traps()?;
        }
        ArchType::Unknown => {
            return Err(crate::KernelError::UnsupportedArchitecture);
        }
    }
    
    Ok(())
}

/// Setup basic x86_64 IDT
fn setup_x86_64_idt() -> BootstrapResult<()> {
    // This would setup a minimal IDT with exception handlers
    // For now, just enable interrupts globally
    unsafe {
        core::arch::asm!("sti");
    }
    Ok(())
}

/// Setup basic ARM64 exception handling
fn setup_aarch64_exceptions() -> BootstrapResult<()> {
    // ARM64 exception handling setup would go here
    Ok(())
}

/// Setup basic RISC-V trap handling
fn setup_riscv64_traps() -> BootstrapResult<()> {
    // RISC-V trap handling setup would go here
    Ok(())
}

/// Get early memory map (simplified for bootstrap)
fn early_memory_map() -> &'static [(u64, usize)] {
    // This is a simplified early memory map for bootstrap
    // In a real implementation, this would be populated from the boot information
    &[
        (0x1000, 0x7FF000),      // Low memory
        (0x100000, 0x7FF00000),  // High memory
    ]
}