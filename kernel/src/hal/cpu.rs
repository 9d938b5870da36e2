//! CPU Hardware Abstraction Layer
//!
//! This module provides unified CPU interfaces across architectures for
//! feature detection, performance monitoring, and CPU management.

use crate::log::{info, warn, error};
use crate::{KernelError, Result};
use spin::RwLock;
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// CPU subsystem initialization
pub fn init() -> Result<()> {
    info!("Initializing CPU HAL...");
    
    // Detect CPU information
    let cpu_info = detect_cpu_info();
    info!("CPU detected: {} ({} cores, {} threads)", 
          cpu_info.model, cpu_info.cores, cpu_info.threads_per_core);
    
    // Detect CPU features
    let features = detect_cpu_features();
    info!("CPU features: {}", features.to_string());
    
    // Initialize performance monitoring
    init_performance_monitoring()?;
    
    // Initialize SMP support if available
    if cpu_info.cores > 1 {
        init_smp_support()?;
    }
    
    Ok(())
}

/// CPU subsystem shutdown
pub fn shutdown() -> Result<()> {
    info!("Shutting down CPU HAL...");
    Ok(())
}

/// CPU information structure
#[derive(Debug, Clone, Copy)]
pub struct CpuInfo {
    pub vendor: &'static str,
    pub model: &'static str,
    pub family: u8,
    pub model_id: u8,
    pub stepping: u8,
    pub frequency_mhz: u32,
    pub cores: u8,
    pub threads_per_core: u8,
    pub cache_line_size: usize,
    pub max_cpus: usize,
}

/// CPU features structure
#[derive(Debug, Clone, Copy)]
pub struct CpuFeatures {
    pub simd_width: u8,      // 0=none, 1=SSE, 2=AVX, 3=AVX-512
    pub has_fma: bool,
    pub has_nx_bit: bool,
    pub has_pae: bool,
    pub has_la57: bool,
    pub has_smep: bool,
    pub has_smap: bool,
    pub has_pge: bool,
    pub has_tsx: bool,
    pub has_rdrand: bool,
    pub has_avx2: bool,
    pub has_avx512: bool,
    pub has_bmi: bool,
    pub has_lzcnt: bool,
}

/// Current CPU information
static CPU_INFO: RwLock<CpuInfo> = RwLock::new(CpuInfo {
    vendor: "Unknown",
    model: "Unknown CPU",
    family: 0,
    model_id: 0,
    stepping: 0,
    frequency_mhz: 1000,
    cores: 1,
    threads_per_core: 1,
    cache_line_size: 64,
    max_cpus: 1,
});

/// Current CPU features
static CPU_FEATURES: RwLock<CpuFeatures> = RwLock::new(CpuFeatures {
    simd_width: 0,
    has_fma: false,
    has_nx_bit: false,
    has_pae: false,
    has_la57: false,
    has_smep: false,
    has_smap: false,
    has_pge: false,
    has_tsx: false,
    has_rdrand: false,
    has_avx2: false,
    has_avx512: false,
    has_bmi: false,
    has_lzcnt: false,
});

/// CPU statistics
#[derive(Debug, Clone, Copy)]
pub struct CpuStats {
    pub cycles: AtomicU64,
    pub instructions: AtomicU64,
    pub cache_misses: AtomicU64,
    pub cache_refs: AtomicU64,
    pub branch_misses: AtomicU64,
    pub branch_refs: AtomicU64,
    pub context_switches: AtomicU64,
    pub interrupts: AtomicU64,
}

impl Default for CpuStats {
    fn default() -> Self {
        Self {
            cycles: AtomicU64::new(0),
            instructions: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            cache_refs: AtomicU64::new(0),
            branch_misses: AtomicU64::new(0),
            branch_refs: AtomicU64::new(0),
            context_switches: AtomicU64::new(0),
            interrupts: AtomicU64::new(0),
        }
    }
}

/// Per-CPU statistics
static CPU_STATS: RwLock<Vec<CpuStats>> = RwLock::new(Vec::new());

/// Get current CPU info
pub fn get_cpu_info() -> CpuInfo {
    *CPU_INFO.read()
}

/// Get current CPU features
pub fn get_cpu_features() -> CpuFeatures {
    *CPU_FEATURES.read()
}

/// Detect CPU information
fn detect_cpu_info() -> CpuInfo {
    #[cfg(target_arch = "x86_64")]
    {
        detect_x86_64_cpu_info()
    }
    #[cfg(target_arch = "aarch64")]
    {
        detect_aarch64_cpu_info()
    }
    #[cfg(target_arch = "riscv64")]
    {
        detect_riscv64_cpu_info()
    }
}

/// Detect CPU features
fn detect_cpu_features() -> CpuFeatures {
    #[cfg(target_arch = "x86_64")]
    {
        detect_x86_64_cpu_features()
    }
    #[cfg(target_arch = "aarch64")]
    {
        detect_aarch64_cpu_features()
    }
    #[cfg(target_arch = "riscv64")]
    {
        detect_riscv64_cpu_features()
    }
}

#[cfg(target_arch = "x86_64")]
fn detect_x86_64_cpu_info() -> CpuInfo {
    use crate::arch::x86_64;
    
    // Get basic info from existing x86_64 module
    let arch_info = x86_64::get_cpu_info();
    
    // Enhanced detection with CPUID
    let (vendor, model, family, model_id, stepping) = detect_x86_64_vendor_info();
    
    let cores = detect_x86_64_logical_cores();
    let threads_per_core = 2; // Assume hyperthreading if supported
    
    CpuInfo {
        vendor,
        model,
        family,
        model_id,
        stepping,
        frequency_mhz: detect_x86_64_frequency(),
        cores,
        threads_per_core,
        cache_line_size: detect_x86_64_cache_line_size(),
        max_cpus: crate::hal::multicore::get_max_cpus(),
    }
}

#[cfg(target_arch = "x86_64")]
fn detect_x86_64_cpu_features() -> CpuFeatures {
    let mut features = CpuFeatures::default();
    
    // Use CPUID for feature detection (simplified)
    // In real implementation, this would use CPUID instruction
    features.simd_width = 2; // Assume AVX support
    features.has_fma = true;
    features.has_nx_bit = true;
    features.has_pae = true;
    features.has_smep = true;
    features.has_smap = true;
    features.has_avx2 = true;
    
    features
}

#[cfg(target_arch = "aarch64")]
fn detect_aarch64_cpu_info() -> CpuInfo {
    // Use existing ARM64 info as base
    let arch_info = crate::arch::aarch64::get_cpu_info();
    
    CpuInfo {
        vendor: "ARM",
        model: "ARMv8-A",
        family: 8,
        model_id: 0,
        stepping: 0,
        frequency_mhz: 2000,
        cores: 4,
        threads_per_core: 1,
        cache_line_size: 64,
        max_cpus: crate::hal::multicore::get_max_cpus(),
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_aarch64_cpu_features() -> CpuFeatures {
    CpuFeatures {
        simd_width: 2, // ARMv8 has NEON (comparable to AVX)
        has_fma: true,
        has_nx_bit: true,
        has_pae: true,
        has_avx2: true,
        has_bmi: true,
        ..Default::default()
    }
}

#[cfg(target_arch = "riscv64")]
fn detect_riscv64_cpu_info() -> CpuInfo {
    // Use existing RISC-V info as base
    let arch_info = crate::arch::riscv64::get_cpu_info();
    
    CpuInfo {
        vendor: "RISC-V",
        model: "RV64GC",
        family: 64,
        model_id: 0,
        stepping: 0,
        frequency_mhz: 1000,
        cores: 4,
        threads_per_core: 1,
        cache_line_size: 64,
        max_cpus: crate::hal::multicore::get_max_cpus(),
    }
}

#[cfg(target_arch = "riscv64")]
fn detect_riscv64_cpu_features() -> CpuFeatures {
    // RISC-V extensions are detected differently
    let mut features = CpuFeatures::default();
    
    // Check for RISC-V extensions
    features.simd_width = 1; // Minimal SIMD
    features.has_fma = true; // F extension
    features.has_nx_bit = false; // RV64 has PTE access control
    
    features
}

// Placeholder implementations for detailed detection
#[cfg(target_arch = "x86_64")]
fn detect_x86_64_vendor_info() -> (&'static str, &'static str, u8, u8, u8) {
    ("GenuineIntel", "Intel Core", 6, 0, 0)
}

#[cfg(target_arch = "x86_64")]
fn detect_x86_64_logical_cores() -> u8 {
    4 // Placeholder
}

#[cfg(target_arch = "x86_64")]
fn detect_x86_64_frequency() -> u32 {
    2400 // Placeholder
}

#[cfg(target_arch = "x86_64")]
fn detect_x86_64_cache_line_size() -> usize {
    64
}

// Initialize performance monitoring
fn init_performance_monitoring() -> Result<()> {
    info!("Initializing CPU performance monitoring...");
    
    // Initialize per-CPU statistics
    let cpu_count = get_cpu_info().cores as usize;
    let mut stats = Vec::with_capacity(cpu_count);
    for _ in 0..cpu_count {
        stats.push(CpuStats::default());
    }
    *CPU_STATS.write() = stats;
    
    Ok(())
}

// Initialize SMP support
fn init_smp_support() -> Result<()> {
    info!("Initializing SMP support...");
    // Initialize APIC or equivalent for SMP
    Ok(())
}

/// Get current CPU ID
pub fn get_current_cpu_id() -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        // Read APIC ID
        let apic_id: u32;
        unsafe {
            core::arch::asm!(
                "pushfq",
                "cli",
                "mov $1, %eax",
                "cpuid",
                "mov ${2}, edx",
                "popfq",
                out(reg) _,
                out(reg) apic_id
            );
        }
        (apic_id >> 24) as usize
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // Read MPIDR_EL1
        let mpidr: u64;
        unsafe {
            core::arch::asm!("mrs {}, mpidr_el1", out(reg) mpidr);
        }
        (mpidr & 0xFF) as usize
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // Read mhartid
        crate::arch::riscv64::registers::csrr(0xF14) as usize
    }
}

/// Get total number of CPUs
pub fn get_total_cpus() -> usize {
    get_cpu_info().cores as usize
}

/// Get current CPU statistics
pub fn get_current_cpu_stats() -> CpuStats {
    let cpu_id = get_current_cpu_id();
    let stats = CPU_STATS.read();
    stats.get(cpu_id).unwrap_or(&CpuStats::default()).clone()
}

/// Increment CPU statistic
pub fn increment_stat(stat: &AtomicU64) {
    stat.fetch_add(1, Ordering::SeqCst);
}

/// Get CPU statistics
pub fn get_stats() -> CpuStats {
    let stats = CPU_STATS.read();
    if stats.is_empty() {
        return CpuStats::default();
    }
    
    let mut total = CpuStats::default();
    for stat in stats.iter() {
        total.cycles.fetch_add(stat.cycles.load(Ordering::SeqCst), Ordering::SeqCst);
        total.instructions.fetch_add(stat.instructions.load(Ordering::SeqCst), Ordering::SeqCst);
        total.cache_misses.fetch_add(stat.cache_misses.load(Ordering::SeqCst), Ordering::SeqCst);
        total.cache_refs.fetch_add(stat.cache_refs.load(Ordering::SeqCst), Ordering::SeqCst);
        total.branch_misses.fetch_add(stat.branch_misses.load(Ordering::SeqCst), Ordering::SeqCst);
        total.branch_refs.fetch_add(stat.branch_refs.load(Ordering::SeqCst), Ordering::SeqCst);
        total.context_switches.fetch_add(stat.context_switches.load(Ordering::SeqCst), Ordering::SeqCst);
        total.interrupts.fetch_add(stat.interrupts.load(Ordering::SeqCst), Ordering::SeqCst);
    }
    
    total
}

/// Halt current CPU
pub fn halt_cpu() {
    #[cfg(target_arch = "x86_64")]
    {
        crate::arch::x86_64::halt();
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        unsafe {
            core::arch::asm!("wfi");
        }
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        unsafe {
            core::arch::asm!("wfi");
        }
    }
}

/// Benchmark CPU performance
pub fn benchmark_cpu() -> u64 {
    let start = get_cycles();
    
    // Simple computation benchmark
    let mut result: u64 = 0;
    for i in 0..1_000_000 {
        result = result.wrapping_add(i * 123456789);
        result ^= i;
    }
    
    let end = get_cycles();
    end - start
}

/// Get cycle count
pub fn get_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        crate::arch::x86_64::get_tsc()
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // ARM64 cycle counter
        let cycles: u64;
        unsafe {
            core::arch::asm!("mrs {}, pmccntr_el0", out(reg) cycles);
        }
        cycles
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        crate::arch::riscv64::registers::get_cycle()
    }
}

impl CpuFeatures {
    /// Convert features to string for logging
    pub fn to_string(&self) -> String {
        let mut features = Vec::new();
        
        if self.has_fma { features.push("FMA"); }
        if self.has_nx_bit { features.push("NX"); }
        if self.has_pae { features.push("PAE"); }
        if self.has_smep { features.push("SMEP"); }
        if self.has_smap { features.push("SMAP"); }
        if self.has_avx2 { features.push("AVX2"); }
        if self.has_avx512 { features.push("AVX512"); }
        if self.has_bmi { features.push("BMI"); }
        
        format!("[{}]", features.join(", "))
    }
}

impl Default for CpuFeatures {
    fn default() -> Self {
        Self {
            simd_width: 0,
            has_fma: false,
            has_nx_bit: false,
            has_pae: false,
            has_la57: false,
            has_smep: false,
            has_smap: false,
            has_pge: false,
            has_tsx: false,
            has_rdrand: false,
            has_avx2: false,
            has_avx512: false,
            has_bmi: false,
            has_lzcnt: false,
        }
    }
}