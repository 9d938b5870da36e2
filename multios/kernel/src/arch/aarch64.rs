//! AArch64 (ARM64) architecture-specific implementation
//! 
//! This module provides AArch64-specific functionality.
//! Currently a stub implementation.

use crate::{BootInfo, KernelResult};
use log::info;

/// Initialize AArch64-specific components
pub fn init(_boot_info: &BootInfo) -> KernelResult<()> {
    info!("Initializing AArch64 architecture...");
    
    // TODO: Implement AArch64-specific initialization
    // - Set up exception handling (AArch64 exception levels)
    // - Configure GIC (Generic Interrupt Controller)
    // - Set up system registers
    // - Enable interrupts
    
    info!("AArch64 architecture initialized (stub)");
    
    Ok(())
}

// Stubs for interrupt handling
// In AArch64, interrupts are handled through:
// - Exception levels (EL0, EL1, EL2, EL3)
// - System registers (DAIF, PSTATE, etc.)
// - Interrupt controllers (GICv2, GICv3)

/// Handle synchronous exception
pub fn handle_sync_exception() {
    // Handle synchronous exceptions (data abort, instruction abort, etc.)
}

/// Handle asynchronous exception
pub fn handle_async_exception() {
    // Handle asynchronous exceptions (IRQ, FIQ, SError)
}

/// Initialize Generic Interrupt Controller (GIC)
fn init_gic() -> KernelResult<()> {
    // Initialize GICv2 or GICv3
    Ok(())
}

/// Enable interrupts
fn enable_interrupts() {
    // Enable interrupts by setting PSTATE.I and PSTATE.F bits
    unsafe {
        core::arch::asm!("msr daifclr, #2"); // Enable IRQ
        // msr daifclr, #1 would enable FIQ
    }
}

/// Disable interrupts
fn disable_interrupts() {
    // Disable interrupts by setting PSTATE.I and PSTATE.F bits
    unsafe {
        core::arch::asm!("msr daifset, #2"); // Disable IRQ
    }
}
