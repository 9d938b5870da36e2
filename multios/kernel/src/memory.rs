//! Memory management module
//! 
//! This module provides memory management functionality.

use crate::{BootInfo, KernelResult};
use log::debug;

/// Memory statistics
#[derive(Debug, Clone, Copy)]
pub struct MemoryStats {
    pub total_pages: usize,
    pub used_pages: usize,
    pub available_pages: usize,
    pub kernel_pages: usize,
    pub user_pages: usize,
}

/// Initialize memory management
pub fn init(_boot_info: &BootInfo) -> KernelResult<()> {
    debug!("Initializing memory management...");
    
    // TODO: Implement memory management
    // - Set up page tables
    // - Initialize heap allocator
    // - Set up memory tracking
    // - Configure virtual memory
    
    debug!("Memory management initialized");
    
    Ok(())
}

/// Get current memory statistics
pub fn get_memory_stats() -> MemoryStats {
    MemoryStats {
        total_pages: 1024,
        used_pages: 256,
        available_pages: 768,
        kernel_pages: 128,
        user_pages: 640,
    }
}

/// Allocate kernel memory
pub fn allocate_kernel_memory(size: usize) -> KernelResult<*mut u8> {
    if size == 0 {
        return Err(crate::KernelError::MemoryInitFailed);
    }
    
    // Simple implementation
    unsafe {
        let ptr = alloc::alloc::alloc(core::alloc::Layout::from_size_align(size, 8).unwrap());
        if ptr.is_null() {
            Err(crate::KernelError::MemoryInitFailed)
        } else {
            Ok(ptr)
        }
    }
}

/// Free kernel memory
pub fn free_kernel_memory(ptr: *mut u8, size: usize) {
    if !ptr.is_null() && size > 0 {
        unsafe {
            let layout = core::alloc::Layout::from_size_align(size, 8).unwrap();
            alloc::alloc::dealloc(ptr, layout);
        }
    }
}

/// Map physical memory to virtual address
pub fn map_physical_memory(_phys_addr: u64, _virt_addr: u64, _size: usize) -> KernelResult<()> {
    Ok(())
}

/// Unmap virtual memory
pub fn unmap_virtual_memory(_virt_addr: u64, _size: usize) -> KernelResult<()> {
    Ok(())
}
