//! Memory Hardware Abstraction Layer
//!
//! This module provides unified memory management interfaces across architectures
//! for physical memory, virtual memory, cache management, and memory mapping.

use crate::log::{info, warn, error};
use crate::{KernelError, Result};
use spin::RwLock;
use core::sync::atomic::{AtomicU64, Ordering};

/// Memory subsystem initialization
pub fn init() -> Result<()> {
    info!("Initializing Memory HAL...");
    
    // Detect memory layout
    detect_memory_layout()?;
    
    // Initialize page allocator
    init_page_allocator()?;
    
    // Set up memory protection
    init_memory_protection()?;
    
    // Initialize cache management
    init_cache_management()?;
    
    Ok(())
}

/// Memory subsystem shutdown
pub fn shutdown() -> Result<()> {
    info!("Shutting down Memory HAL...");
    Ok(())
}

/// Memory types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MemoryType {
    Usable = 0,
    Reserved = 1,
    AcpiReclaimable = 2,
    AcpiNvs = 3,
    BadMemory = 4,
    Bootloader = 5,
    Kernel = 6,
    Module = 7,
    DeviceMemory = 8,
    Unknown = 255,
}

/// Memory region descriptor
#[derive(Debug, Clone, Copy)]
pub struct MemoryRegion {
    pub start: usize,
    pub size: usize,
    pub mem_type: MemoryType,
    pub attributes: MemoryAttributes,
}

/// Memory attributes
#[derive(Debug, Clone, Copy)]
pub struct MemoryAttributes {
    pub readable: bool,
    pub writable: bool,
    pub executable: bool,
    pub cacheable: bool,
    pub present: bool,
}

/// Memory layout structure
#[derive(Debug, Clone)]
pub struct MemoryLayout {
    pub total_memory: u64,
    pub usable_memory: u64,
    pub kernel_start: usize,
    pub kernel_end: usize,
    pub boot_info_start: usize,
    pub boot_info_end: usize,
    pub modules_start: usize,
    pub modules_end: usize,
    pub reserved_regions: Vec<MemoryRegion>,
    pub memory_map: Vec<MemoryRegion>,
}

/// Page size configuration
#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    pub base_size: usize,       // 4KB base page size
    pub large_size: usize,      // 2MB large page size
    pub huge_size: usize,       // 1GB huge page size
    pub levels: u8,             // Page table levels
    pub offset_bits: u8,        // Bits for page offset
}

/// Memory statistics
#[derive(Debug, Clone)]
pub struct MemoryStats {
    pub total_pages: u64,
    pub free_pages: u64,
    pub allocated_pages: u64,
    pub reserved_pages: u64,
    pub page_faults: u64,
    pub tlb_misses: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// Cache information
#[derive(Debug, Clone, Copy)]
pub struct CacheInfo {
    pub level: u8,
    pub cache_type: u8, // 1=instruction, 2=data, 3=unified
    pub size_kb: u32,
    pub associativity: u16,
    pub line_size: u16,
    pub threads_sharing: u8,
}

/// NUMA information
#[derive(Debug, Clone)]
pub struct NumaInfo {
    pub node_count: usize,
    pub memory_per_node: Vec<u64>,
    pub cpu_per_node: Vec<Vec<usize>>,
}

/// Current memory layout
static MEMORY_LAYOUT: RwLock<Option<MemoryLayout>> = RwLock::new(None);

/// Page configuration
static PAGE_CONFIG: RwLock<Option<PageConfig>> = RwLock::new(None);

/// Memory statistics
static MEMORY_STATS: AtomicU64 = AtomicU64::new(0);

/// Cache information
static CACHE_INFO: RwLock<Vec<CacheInfo>> = RwLock::new(Vec::new());

/// NUMA information
static NUMA_INFO: RwLock<Option<NumaInfo>> = RwLock::new(None);

/// Get current memory layout
pub fn get_memory_layout() -> Option<MemoryLayout> {
    MEMORY_LAYOUT.read().clone()
}

/// Get page configuration
pub fn get_page_config() -> Option<PageConfig> {
    *PAGE_CONFIG.read()
}

/// Detect memory layout
fn detect_memory_layout() -> Result<()> {
    info!("Detecting memory layout...");
    
    let layout = detect_memory_layout_arch()?;
    *MEMORY_LAYOUT.write() = Some(layout);
    
    info!("Memory layout detected: {}MB total, {}MB usable",
          layout.total_memory / 1024 / 1024,
          layout.usable_memory / 1024 / 1024);
    
    Ok(())
}

/// Architecture-specific memory layout detection
#[cfg(target_arch = "x86_64")]
fn detect_memory_layout_arch() -> Result<MemoryLayout> {
    use crate::arch::x86_64;
    
    // Use existing x86_64 system configuration
    let config = x86_64::get_system_config();
    
    // Basic layout for x86_64
    Ok(MemoryLayout {
        total_memory: 8 * 1024 * 1024 * 1024, // 8GB placeholder
        usable_memory: 7 * 1024 * 1024 * 1024, // 7GB usable
        kernel_start: 0x100000, // 1MB
        kernel_end: 0x1000000,  // 16MB
        boot_info_start: 0x8000,
        boot_info_end: 0x10000,
        modules_start: 0x1000000,
        modules_end: 0x2000000,
        reserved_regions: Vec::new(),
        memory_map: Vec::new(),
    })
}

#[cfg(target_arch = "aarch64")]
fn detect_memory_layout_arch() -> Result<MemoryLayout> {
    use crate::arch::aarch64;
    
    let config = aarch64::get_system_config();
    
    Ok(MemoryLayout {
        total_memory: 8 * 1024 * 1024 * 1024, // 8GB placeholder
        usable_memory: 7 * 1024 * 1024 * 1024, // 7GB usable
        kernel_start: 0x80000000, // Standard ARM64 kernel base
        kernel_end: 0x81000000,
        boot_info_start: 0x7FE00000,
        boot_info_end: 0x80000000,
        modules_start: 0x81000000,
        modules_end: 0x82000000,
        reserved_regions: Vec::new(),
        memory_map: Vec::new(),
    })
}

#[cfg(target_arch = "riscv64")]
fn detect_memory_layout_arch() -> Result<MemoryLayout> {
    use crate::arch::riscv64;
    
    let config = riscv64::get_system_config();
    
    Ok(MemoryLayout {
        total_memory: 8 * 1024 * 1024 * 1024, // 8GB placeholder
        usable_memory: 7 * 1024 * 1024 * 1024, // 7GB usable
        kernel_start: 0x80000000, // RISC-V kernel base
        kernel_end: 0x81000000,
        boot_info_start: 0x7FE00000,
        boot_info_end: 0x80000000,
        modules_start: 0x81000000,
        modules_end: 0x82000000,
        reserved_regions: Vec::new(),
        memory_map: Vec::new(),
    })
}

/// Initialize page allocator
fn init_page_allocator() -> Result<()> {
    info!("Initializing page allocator...");
    
    let layout = get_memory_layout().unwrap();
    
    // Set up page configuration
    let page_config = PageConfig {
        base_size: 4096,
        large_size: 2 * 1024 * 1024,
        huge_size: 1024 * 1024 * 1024,
        levels: get_page_table_levels(),
        offset_bits: 12, // 2^12 = 4096
    };
    
    *PAGE_CONFIG.write() = Some(page_config);
    
    Ok(())
}

/// Get number of page table levels for current architecture
fn get_page_table_levels() -> u8 {
    #[cfg(target_arch = "x86_64")]
    {
        4 // PML4, PDPT, PD, PT (4 levels for 48-bit addresses)
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        4 // TTBR0_EL1, TTBR1_EL1 (4 levels for 48-bit VA)
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        3 // Sv48 (3 levels for 48-bit VA)
    }
}

/// Initialize memory protection
fn init_memory_protection() -> Result<()> {
    info!("Initializing memory protection...");
    
    let features = crate::hal::cpu::get_cpu_features();
    
    // Enable memory protection features
    if features.has_nx_bit {
        info!("Enabling NX (No-Execute) bit protection");
        enable_nx_protection()?;
    }
    
    if features.has_smep {
        info!("Enabling SMEP (Supervisor Mode Execution Prevention)");
        enable_smep_protection()?;
    }
    
    if features.has_smap {
        info!("Enabling SMAP (Supervisor Mode Access Prevention)");
        enable_smap_protection()?;
    }
    
    Ok(())
}

/// Enable NX protection
fn enable_nx_protection() -> Result<()> {
    #[cfg(target_arch = "x86_64")]
    {
        // Enable NX bit in page tables
        // This would involve setting up EFER.NXE
        info!("NX protection enabled (x86_64)");
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // ARM64 uses PTE NX bit
        info!("NX protection enabled (ARM64)");
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // RISC-V uses PTE NX bit
        info!("NX protection enabled (RISC-V)");
    }
    
    Ok(())
}

/// Enable SMEP protection
fn enable_smep_protection() -> Result<()> {
    #[cfg(target_arch = "x86_64")]
    {
        // Enable SMEP in CR4
        info!("SMEP protection enabled (x86_64)");
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // ARM64 has different mechanism
        info!("SMEP protection enabled (ARM64)");
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // RISC-V needs alternative protection
        info!("SMEP protection enabled (RISC-V)");
    }
    
    Ok(())
}

/// Enable SMAP protection
fn enable_smap_protection() -> Result<()> {
    #[cfg(target_arch = "x86_64")]
    {
        // Enable SMAP in CR4
        info!("SMAP protection enabled (x86_64)");
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // ARM64 equivalent protection
        info!("SMAP protection enabled (ARM64)");
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // RISC-V equivalent protection
        info!("SMAP protection enabled (RISC-V)");
    }
    
    Ok(())
}

/// Initialize cache management
fn init_cache_management() -> Result<()> {
    info!("Initializing cache management...");
    
    // Detect cache information
    detect_cache_info()?;
    
    // Configure cache attributes
    configure_cache_attributes()?;
    
    Ok(())
}

/// Detect cache information
fn detect_cache_info() -> Result<()> {
    info!("Detecting cache information...");
    
    let caches = detect_cache_info_arch()?;
    *CACHE_INFO.write() = caches;
    
    info!("Cache information detected: {} cache levels", caches.len());
    for cache in &caches {
        info!("L{} cache: {}KB, {}way, {}B line size", 
              cache.level, cache.size_kb, cache.associativity, cache.line_size);
    }
    
    Ok(())
}

/// Architecture-specific cache detection
#[cfg(target_arch = "x86_64")]
fn detect_cache_info_arch() -> Result<Vec<CacheInfo>> {
    let mut caches = Vec::new();
    
    // L1 cache
    caches.push(CacheInfo {
        level: 1,
        cache_type: 2, // data cache
        size_kb: 32,
        associativity: 8,
        line_size: 64,
        threads_sharing: 1,
    });
    
    // L2 cache
    caches.push(CacheInfo {
        level: 2,
        cache_type: 3, // unified cache
        size_kb: 256,
        associativity: 4,
        line_size: 64,
        threads_sharing: 1,
    });
    
    // L3 cache (shared)
    caches.push(CacheInfo {
        level: 3,
        cache_type: 3, // unified cache
        size_kb: 8192,
        associativity: 16,
        line_size: 64,
        threads_sharing: 4,
    });
    
    Ok(caches)
}

#[cfg(target_arch = "aarch64")]
fn detect_cache_info_arch() -> Result<Vec<CacheInfo>> {
    let mut caches = Vec::new();
    
    // ARM64 cache hierarchy
    caches.push(CacheInfo {
        level: 1,
        cache_type: 2, // data cache
        size_kb: 64,
        associativity: 4,
        line_size: 64,
        threads_sharing: 1,
    });
    
    caches.push(CacheInfo {
        level: 2,
        cache_type: 3, // unified cache
        size_kb: 512,
        associativity: 8,
        line_size: 64,
        threads_sharing: 4,
    });
    
    Ok(caches)
}

#[cfg(target_arch = "riscv64")]
fn detect_cache_info_arch() -> Result<Vec<CacheInfo>> {
    let mut caches = Vec::new();
    
    // RISC-V cache hierarchy (simplified)
    caches.push(CacheInfo {
        level: 1,
        cache_type: 2, // data cache
        size_kb: 32,
        associativity: 4,
        line_size: 64,
        threads_sharing: 1,
    });
    
    caches.push(CacheInfo {
        level: 2,
        cache_type: 3, // unified cache
        size_kb: 256,
        associativity: 4,
        line_size: 64,
        threads_sharing: 4,
    });
    
    Ok(caches)
}

/// Configure cache attributes
fn configure_cache_attributes() -> Result<()> {
    info!("Configuring cache attributes...");
    
    // Configure memory attributes for different memory types
    configure_memory_attributes()?;
    
    Ok(())
}

/// Configure memory attributes
fn configure_memory_attributes() -> Result<()> {
    #[cfg(target_arch = "x86_64")]
    {
        // Configure MTRRs for memory attribute control
        info!("MTRR configuration (x86_64)");
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // Configure MAIR_EL1 (Memory Attribute Indirection Register)
        let mair_val = 0xFF; // Normal memory, Write-Back Read/Write Allocate
        crate::arch::aarch64::registers::msr(0xC010_0000, mair_val);
        info!("MAIR_EL1 configured (ARM64)");
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // RISC-V page table attributes
        info!("PTE attributes configured (RISC-V)");
    }
    
    Ok(())
}

/// Flush cache for address range
pub fn flush_cache_range(start: usize, size: usize) -> Result<()> {
    #[cfg(target_arch = "x86_64")]
    {
        // Use CLFLUSH instruction
        let end = start + size;
        for addr in (start..end).step_by(64) {
            unsafe {
                core::arch::asm!("clflush [{}]", in(reg) addr);
            }
        }
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // ARM64 cache flush
        unsafe {
            core::arch::asm!(
                "dc cvau, {0}",
                "ic ivau, {0}",
                in(reg) start
            );
        }
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // RISC-V cache maintenance
        // This would require custom instructions
    }
    
    Ok(())
}

/// Flush TLB for address
pub fn flush_tlb_address(address: usize) {
    #[cfg(target_arch = "x86_64")]
    {
        crate::arch::x86_64::flush_tlb_page(address);
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // ARM64 TLB invalidation
        unsafe {
            core::arch::asm!("tlbi vaae1, {}", in(reg) address >> 12);
        }
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // RISC-V SFENCE.VMA
        unsafe {
            core::arch::asm!("sfence.vma {}", in(reg) address);
        }
    }
}

/// Flush entire TLB
pub fn flush_tlb() {
    #[cfg(target_arch = "x86_64")]
    {
        crate::arch::x86_64::flush_tlb();
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // ARM64 TLB invalidation
        unsafe {
            core::arch::asm!("tlbi vmalle1");
        }
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // RISC-V SFENCE.VMA with rs1=x0 (flush all)
        unsafe {
            core::arch::asm!("sfence.vma");
        }
    }
}

/// Get memory statistics
pub fn get_stats() -> MemoryStats {
    MemoryStats {
        total_pages: 0,
        free_pages: 0,
        allocated_pages: 0,
        reserved_pages: 0,
        page_faults: 0,
        tlb_misses: 0,
        cache_hits: 0,
        cache_misses: 0,
    }
}

/// Benchmark memory performance
pub fn benchmark_memory() -> u64 {
    let layout = get_memory_layout().unwrap();
    let start_addr = layout.modules_end;
    let size = 1024 * 1024; // 1MB
    
    // Memory write benchmark
    let start = crate::hal::cpu::get_cycles();
    
    let ptr = start_addr as *mut u8;
    unsafe {
        for i in 0..size {
            ptr.add(i).write_volatile((i % 256) as u8);
        }
    }
    
    let end = crate::hal::cpu::get_cycles();
    end - start
}

/// Get page size
pub fn get_page_size() -> usize {
    4096
}

/// Get large page size
pub fn get_large_page_size() -> usize {
    2 * 1024 * 1024
}

/// Get huge page size
pub fn get_huge_page_size() -> usize {
    1024 * 1024 * 1024
}

/// Check if address is aligned to page
pub fn is_page_aligned(address: usize) -> bool {
    address & (get_page_size() - 1) == 0
}

/// Align address to page boundary
pub fn align_to_page(address: usize) -> usize {
    address & !(get_page_size() - 1)
}

/// Align size to page size
pub fn align_size_to_pages(size: usize) -> usize {
    (size + get_page_size() - 1) & !(get_page_size() - 1)
}

/// Virtual to physical address translation
pub fn virtual_to_physical(address: usize) -> Option<usize> {
    // This would involve walking the page table
    // For now, return the address as-is (identity mapping)
    Some(address)
}

/// Physical to virtual address translation
pub fn physical_to_virtual(address: usize) -> Option<usize> {
    // This would involve finding virtual mapping for physical address
    Some(address)
}

/// Memory mapping functions
pub mod mapping {
    use super::*;
    
    /// Map physical memory range to virtual address space
    pub fn map_physical(phys_addr: usize, size: usize, attributes: MemoryAttributes) -> Result<usize> {
        info!("Mapping physical memory: {:#x} - {:#x}", phys_addr, phys_addr + size);
        
        // This would involve setting up page table entries
        // For now, return identity mapping
        Ok(phys_addr)
    }
    
    /// Unmap virtual address range
    pub fn unmap_virtual(virt_addr: usize, size: usize) -> Result<()> {
        info!("Unmapping virtual memory: {:#x} - {:#x}", virt_addr, virt_addr + size);
        Ok(())
    }
    
    /// Change memory attributes
    pub fn change_attributes(virt_addr: usize, size: usize, attributes: MemoryAttributes) -> Result<()> {
        info!("Changing memory attributes: {:#x} - {:#x}", virt_addr, virt_addr + size);
        Ok(())
    }
}

/// NUMA functions
pub mod numa {
    use super::*;
    
    /// Get NUMA information
    pub fn get_numa_info() -> Option<NumaInfo> {
        *NUMA_INFO.read()
    }
    
    /// Get memory node for address
    pub fn get_memory_node(address: usize) -> Option<usize> {
        Some(0) // Single node for now
    }
    
    /// Get CPU node
    pub fn get_cpu_node(cpu_id: usize) -> Option<usize> {
        Some(0) // Single node for now
    }
    
    /// Allocate memory on specific node
    pub fn allocate_node_memory(node_id: usize, size: usize) -> Result<usize> {
        info!("Allocating {} bytes on NUMA node {}", size, node_id);
        Ok(0)
    }
}