//! CPU Performance Monitoring and Metrics
//! 
//! This module provides comprehensive CPU performance monitoring for x86_64,
//! ARM64, and RISC-V architectures, including hardware performance counters,
//! power management metrics, and thermal monitoring.

use crate::log::{info, warn, error};
use crate::KernelError;
use super::{ArchType, CpuFeatures};

/// Performance counter types
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum CounterType {
    Cycles = 0,
    Instructions = 1,
    CacheL1Access = 2,
    CacheL1Miss = 3,
    CacheL2Access = 4,
    CacheL2Miss = 5,
    CacheL3Access = 6,
    CacheL3Miss = 7,
    TlbAccess = 8,
    TlbMiss = 9,
    BranchPrediction = 10,
    BranchMisprediction = 11,
    FloatingPoint = 12,
    MemoryRead = 13,
    MemoryWrite = 14,
    BusCycles = 15,
    StalledCycles = 16,
    Custom = 255,
}

/// Performance counter information
#[derive(Debug, Clone)]
pub struct PerformanceCounter {
    pub counter_type: CounterType,
    pub name: &'static str,
    pub description: &'static str,
    pub available: bool,
    pub configurable: bool,
    pub fixed_function: bool,
}

/// Performance metrics structure
#[derive(Debug, Clone)]
pub struct PerformanceMetrics {
    pub architecture: ArchType,
    
    // Core metrics
    pub cycles: u64,
    pub instructions: u64,
    pub frequency_mhz: u32,
    
    // Cache metrics
    pub l1_accesses: u64,
    pub l1_misses: u64,
    pub l1_miss_rate: f64,
    pub l2_accesses: u64,
    pub l2_misses: u64,
    pub l2_miss_rate: f64,
    pub l3_accesses: u64,
    pub l3_misses: u64,
    pub l3_miss_rate: f64,
    
    // Branch prediction metrics
    pub branches: u64,
    pub branch_mispredictions: u64,
    pub branch_misprediction_rate: f64,
    
    // TLB metrics
    pub tlb_accesses: u64,
    pub tlb_misses: u64,
    pub tlb_miss_rate: f64,
    
    // Memory metrics
    pub memory_reads: u64,
    pub memory_writes: u64,
    pub memory_bandwidth_mb: f64,
    
    // Power and thermal metrics (if available)
    pub temperature_celsius: Option<f32>,
    pub power_consumption_watts: Option<f32>,
    pub frequency_actual_mhz: u32,
    pub frequency_max_mhz: u32,
}

/// Performance monitoring unit (PMU) configuration
#[derive(Debug, Clone)]
pub struct PmuConfig {
    pub architecture: ArchType,
    pub enabled_counters: Vec<CounterType>,
    pub counter_width: u8,
    pub fixed_counters: u8,
    pub programmable_counters: u8,
    pub supports_general_counters: bool,
    pub supports_fixed_counters: bool,
    pub supports_branch_counters: bool,
    pub supports_cache_counters: bool,
    pub supports_power_metrics: bool,
    pub supports_thermal_metrics: bool,
}

/// CPU performance event
#[derive(Debug, Clone)]
pub struct PerformanceEvent {
    pub event_id: u32,
    pub umask: u8,
    pub event_name: &'static str,
    pub description: &'static str,
}

/// CPU performance monitoring implementation
pub struct PerformanceMonitor {
    architecture: ArchType,
    features: CpuFeatures,
    config: Option<PmuConfig>,
    counters: Vec<PerformanceCounter>,
    event_list: Vec<PerformanceEvent>,
    initial_counters: Option<PerformanceMetrics>,
    is_initialized: bool,
}

impl PerformanceMonitor {
    /// Create new performance monitor
    pub fn new(architecture: ArchType, features: CpuFeatures) -> Self {
        Self {
            architecture,
            features,
            config: None,
            counters: Vec::new(),
            event_list: Vec::new(),
            initial_counters: None,
            is_initialized: false,
        }
    }
    
    /// Initialize performance monitoring
    pub fn init(&mut self) -> Result<(), KernelError> {
        info!("Initializing performance monitor for {:?}...", self.architecture);
        
        match self.architecture {
            ArchType::X86_64 => self.init_x86_64_pmu()?,
            ArchType::AArch64 => self.init_aarch64_pmu()?,
            ArchType::Riscv64 => self.init_riscv64_pmu()?,
        }
        
        self.detect_counters();
        self.detect_events();
        self.initial_counters = Some(self.read_counters());
        
        self.is_initialized = true;
        info!("Performance monitor initialized successfully");
        Ok(())
    }
    
    /// Initialize x86_64 Performance Monitoring Unit (PMU)
    fn init_x86_64_pmu(&mut self) -> Result<(), KernelError> {
        info!("Initializing x86_64 PMU...");
        
        // Check for PMU support
        let has_pmu = self.features.avx512 || self.features.avx2 || self.features.sse4_1;
        if !has_pmu {
            warn!("Limited or no PMU support on this x86_64 CPU");
            return Ok(());
        }
        
        // Detect PMU version and capabilities
        let pmu_version = self.detect_x86_64_pmu_version();
        let counter_width = self.detect_x86_64_counter_width();
        let num_fixed = self.detect_x86_64_fixed_counters();
        let num_general = self.detect_x86_64_general_counters();
        
        self.config = Some(PmuConfig {
            architecture: self.architecture,
            enabled_counters: Vec::new(),
            counter_width,
            fixed_counters: num_fixed,
            programmable_counters: num_general,
            supports_general_counters: true,
            supports_fixed_counters: num_fixed > 0,
            supports_branch_counters: true,
            supports_cache_counters: true,
            supports_power_metrics: true, // Modern CPUs support this
            supports_thermal_metrics: true, // Most modern CPUs support this
        });
        
        // Enable PMU via MSR access
        self.enable_x86_64_pmu()?;
        
        info!("x86_64 PMU configured: version {}, counters {}, width {}", 
              pmu_version, num_general + num_fixed, counter_width);
        
        Ok(())
    }
    
    /// Initialize ARM64 Performance Monitoring Unit (PMU)
    fn init_aarch64_pmu(&mut self) -> Result<(), KernelError> {
        info!("Initializing ARM64 PMU...");
        
        // Detect PMU version and capabilities
        let pmu_version = self.detect_aarch64_pmu_version();
        let num_counters = self.detect_aarch64_counters();
        let counter_width = 64; // ARM64 typically uses 64-bit counters
        
        self.config = Some(PmuConfig {
            architecture: self.architecture,
            enabled_counters: Vec::new(),
            counter_width,
            fixed_counters: 0, // ARM64 doesn't have fixed counters like x86_64
            programmable_counters: num_counters,
            supports_general_counters: true,
            supports_fixed_counters: false,
            supports_branch_counters: true,
            supports_cache_counters: true,
            supports_power_metrics: true, // ARM64 supports power metrics
            supports_thermal_metrics: true, // ARM64 supports thermal metrics
        });
        
        // Configure ARM64 PMU via system registers
        self.enable_aarch64_pmu()?;
        
        info!("ARM64 PMU configured: version {}, counters {}, width {}", 
              pmu_version, num_counters, counter_width);
        
        Ok(())
    }
    
    /// Initialize RISC-V Performance Monitoring Unit (PMU)
    fn init_riscv64_pmu(&mut self) -> Result<(), KernelError> {
        info!("Initializing RISC-V64 PMU...");
        
        // Check for RISC-V privilege extensions (N extension)
        if !self.features.n {
            warn!("No user-level interrupts support - limited PMU functionality");
        }
        
        // Check for RISC-V counters (time, cycle, instret)
        let has_time = true; // RISC-V always has time counter
        let has_cycle = true; // RISC-V always has cycle counter
        let has_instret = self.features.f || self.features.d; // instret requires F/D extension
        
        if !has_cycle || !has_instret {
            warn!("Limited RISC-V counter support");
        }
        
        // Detect PMU counters
        let num_counters = self.detect_riscv64_counters();
        
        self.config = Some(PmuConfig {
            architecture: self.architecture,
            enabled_counters: Vec::new(),
            counter_width: 64,
            fixed_counters: 3, // time, cycle, instret
            programmable_counters: num_counters,
            supports_general_counters: true,
            supports_fixed_counters: true,
            supports_branch_counters: true,
            supports_cache_counters: true,
            supports_power_metrics: false, // RISC-V typically doesn't have power metrics
            supports_thermal_metrics: false, // RISC-V typically doesn't have thermal metrics
        });
        
        // Enable RISC-V counters
        self.enable_riscv64_counters()?;
        
        info!("RISC-V64 PMU configured: counters {}, width 64", 
              num_counters + 3); // +3 for fixed counters
        
        Ok(())
    }
    
    /// Detect x86_64 PMU version
    fn detect_x86_64_pmu_version(&self) -> u8 {
        #[cfg(target_arch = "x86_64")]
        {
            let mut eax: u32;
            let mut ebx: u32;
            
            unsafe {
                core::arch::asm!(
                    "cpuid",
                    inout("eax") 0xA => eax,
                    inout("ebx") 0 => ebx,
                );
            }
            
            (eax & 0xFF) as u8 // PMU version is in bits 0-7 of EAX
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            0
        }
    }
    
    /// Detect x86_64 counter width
    fn detect_x86_64_counter_width(&self) -> u8 {
        #[cfg(target_arch = "x86_64")]
        {
            let mut eax: u32;
            
            unsafe {
                core::arch::asm!(
                    "cpuid",
                    inout("eax") 0xA => eax,
                );
            }
            
            let counter_width_bits = ((eax >> 16) & 0xFF) as u8;
            counter_width_bits
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            8
        }
    }
    
    /// Detect x86_64 fixed counters
    fn detect_x86_64_fixed_counters(&self) -> u8 {
        #[cfg(target_arch = "x86_64")]
        {
            let mut edx: u32;
            
            unsafe {
                core::arch::asm!(
                    "cpuid",
                    inout("eax") 0xA => eax,
                    inout("edx") 0 => edx,
                );
            }
            
            // Fixed counters available = bit 0 of EDX
            (edx & 1) as u8
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            3 // Typical: cycles, instructions, reference cycles
        }
    }
    
    /// Detect x86_64 general counters
    fn detect_x86_64_general_counters(&self) -> u8 {
        #[cfg(target_arch = "x86_64")]
        {
            let mut ebx: u32;
            
            unsafe {
                core::arch::asm!(
                    "cpuid",
                    inout("eax") 0xA => eax,
                    inout("ebx") 0 => ebx,
                );
            }

            
            // Number of general-purpose counters in bits 0-15 of EBX
            (ebx & 0xFFFF) as u8
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            4 // Typical minimum
        }
    }
    
    /// Enable x86_64 PMU
    fn enable_x86_64_pmu(&self) -> Result<(), KernelError> {
        #[cfg(target_arch = "x86_64")]
        {
            // Enable global PMU control (IA32_PERF_GLOBAL_CTL MSR 0x38F)
            let global_ctrl = 0x7FFFFFFFFFFu64; // Enable all available counters
            
            unsafe {
                core::arch::asm!(
                    "mov {}, %rax",
                    "wrmsr",
                    in(reg) global_ctrl,
                    in("rcx") 0x38Fu64,
                );
            }
            
            // Enable fixed-function counters
            if let Some(ref config) = self.config {
                if config.fixed_counters > 0 {
                    let fixed_ctrl = 0x7u64; // Enable all fixed counters
                    unsafe {
                        core::arch::asm!(
                            "mov {}, %rax",
                            "wrmsr",
                            in(reg) fixed_ctrl,
                            in("rcx") 0x39Du64,
                        );
                    }
                }
            }
        }
        
        Ok(())
    }
    
    /// Detect ARM64 PMU version
    fn detect_aarch64_pmu_version(&self) -> u8 {
        #[cfg(target_arch = "aarch64")]
        {
            let mut pmcr: u64;
            unsafe {
                core::arch::asm!("mrs {}, pmcr_el0", out(reg) pmcr);
            }
            ((pmcr >> 11) & 0x1F) as u8 // PMCR.N field
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            4 // ARMv8-PMUv3
        }
    }
    
    /// Detect ARM64 counters
    fn detect_aarch64_counters(&self) -> u8 {
        #[cfg(target_arch = "aarch64")]
        {
            let mut pmcr: u64;
            unsafe {
                core::arch::asm!("mrs {}, pmcr_el0", out(reg) pmcr);
            }
            (pmcr & 0x1F) as u8 // PMCR.N field (bits 0-4)
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            8 // Typical ARM64 default
        }
    }
    
    /// Enable ARM64 PMU
    fn enable_aarch64_pmu(&self) -> Result<(), KernelError> {
        #[cfg(target_arch = "aarch64")]
        {
            // Enable PMU
            unsafe {
                core::arch::asm!("msr pmcr_el0, {}", in(reg) 0x1u64); // PMCR.E bit
                core::arch::asm!("msr pmcntenset_el0, {}", in(reg) 0x800000000000000Fu64); // Enable all counters
            }
        }
        
        Ok(())
    }
    
    /// Detect RISC-V counters
    fn detect_riscv64_counters(&self) -> u8 {
        #[cfg(target_arch = "riscv64")]
        {
            // Check mcounteren for available counters
            let mut mcounteren: u64;
            unsafe {
                core::arch::asm!("csrr {}, 0x320", out(reg) mcounteren);
            }
            
            let mut count = 0;
            for i in 0..32 {
                if (mcounteren & (1 << i)) != 0 {
                    count += 1;
                }
            }
            count
        }
        #[cfg(not(target_arch = "riscv64"))]
        {
            0
        }
    }
    
    /// Enable RISC-V counters
    fn enable_riscv64_counters(&self) -> Result<(), KernelError> {
        #[cfg(target_arch = "riscv64")]
        {
            // Enable cycle, time, and instruction counters
            unsafe {
                core::arch::asm!("csrw 0x320, {}", in(reg) 0x7u64); // mcounteren: cycle, time, instret
            }
        }
        
        Ok(())
    }
    
    /// Detect available performance counters
    fn detect_counters(&mut self) {
        self.counters.clear();
        
        // Common counters
        self.counters.push(PerformanceCounter {
            counter_type: CounterType::Cycles,
            name: "cycles",
            description: "CPU cycles",
            available: true,
            configurable: false,
            fixed_function: true,
        });
        
        self.counters.push(PerformanceCounter {
            counter_type: CounterType::Instructions,
            name: "instructions",
            description: "Retired instructions",
            available: true,
            configurable: false,
            fixed_function: true,
        });
        
        // Architecture-specific counters
        match self.architecture {
            ArchType::X86_64 => self.detect_x86_64_counters(),
            ArchType::AArch64 => self.detect_aarch64_counters(),
            ArchType::Riscv64 => self.detect_riscv64_counters(),
        }
    }
    
    /// Detect x86_64 specific counters
    fn detect_x86_64_counters(&mut self) {
        if let Some(ref config) = self.config {
            if config.supports_cache_counters {
                self.counters.push(PerformanceCounter {
                    counter_type: CounterType::CacheL1Access,
                    name: "l1_accesses",
                    description: "L1 cache accesses",
                    available: true,
                    configurable: true,
                    fixed_function: false,
                });
            }
            
            if config.supports_branch_counters {
                self.counters.push(PerformanceCounter {
                    counter_type: CounterType::BranchPrediction,
                    name: "branches",
                    description: "Branch predictions",
                    available: true,
                    configurable: true,
                    fixed_function: false,
                });
            }
        }
    }
    
    /// Detect ARM64 specific counters
    fn detect_aarch64_counters(&mut self) {
        if self.features.neon {
            self.counters.push(PerformanceCounter {
                counter_type: CounterType::FloatingPoint,
                name: "neon_operations",
                description: "NEON operations",
                available: true,
                configurable: true,
                fixed_function: false,
            });
        }
    }
    
    /// Detect RISC-V specific counters
    fn detect_riscv64_counters(&mut self) {
        if self.features.a {
            self.counters.push(PerformanceCounter {
                counter_type: CounterType::StalledCycles,
                name: "atomic_stalls",
                description: "Atomic operation stalls",
                available: true,
                configurable: true,
                fixed_function: false,
            });
        }
    }
    
    /// Detect available performance events
    fn detect_events(&mut self) {
        self.event_list.clear();
        
        match self.architecture {
            ArchType::X86_64 => self.detect_x86_64_events(),
            ArchType::AArch64 => self.detect_aarch64_events(),
            ArchType::Riscv64 => self.detect_riscv64_events(),
        }
    }
    
    /// Detect x86_64 performance events
    fn detect_x86_64_events(&mut self) {
        // Common x86_64 events
        self.event_list.push(PerformanceEvent {
            event_id: 0x3C,
            umask: 0x00,
            event_name: "UNHALTED_CYCLES",
            description: "Unhalted core cycles",
        });
        
        self.event_list.push(PerformanceEvent {
            event_id: 0x00,
            umask: 0x01,
            event_name: "INSTRUCTIONS_RETIRED",
            description: "Retired instructions",
        });
        
        self.event_list.push(PerformanceEvent {
            event_id: 0xD0,
            umask: 0x81,
            event_name: "MEM_UOPS_RETIRED",
            description: "Memory uops retired",
        });
    }
    
    /// Detect ARM64 performance events
    fn detect_aarch64_events(&mut self) {
        // Common ARM64 events (architectural event numbers)
        self.event_list.push(PerformanceEvent {
            event_id: 0x11,
            umask: 0x00,
            event_name: "CYCLES",
            description: "Cycles",
        });
        
        self.event_list.push(PerformanceEvent {
            event_id: 0x08,
            umask: 0x00,
            event_name: "INSTRUCTIONS",
            description: "Instructions",
        });
        
        self.event_list.push(PerformanceEvent {
            event_id: 0x04,
            umask: 0x00,
            event_name: "CACHE_REFERENCES",
            description: "Cache references",
        });
    }
    
    /// Detect RISC-V performance events
    fn detect_riscv64_events(&mut self) {
        // RISC-V events (platform-specific)
        self.event_list.push(PerformanceEvent {
            event_id: 0x01,
            umask: 0x00,
            event_name: "CYCLES",
            description: "Cycle counter",
        });
        
        self.event_list.push(PerformanceEvent {
            event_id: 0x02,
            umask: 0x00,
            event_name: "INSTRUCTIONS",
            description: "Instruction counter",
        });
    }
    
    /// Read performance counters
    pub fn read_counters(&self) -> PerformanceMetrics {
        let mut metrics = PerformanceMetrics {
            architecture: self.architecture,
            cycles: 0,
            instructions: 0,
            frequency_mhz: 0,
            l1_accesses: 0,
            l1_misses: 0,
            l1_miss_rate: 0.0,
            l2_accesses: 0,
            l2_misses: 0,
            l2_miss_rate: 0.0,
            l3_accesses: 0,
            l3_misses: 0,
            l3_miss_rate: 0.0,
            branches: 0,
            branch_mispredictions: 0,
            branch_misprediction_rate: 0.0,
            tlb_accesses: 0,
            tlb_misses: 0,
            tlb_miss_rate: 0.0,
            memory_reads: 0,
            memory_writes: 0,
            memory_bandwidth_mb: 0.0,
            temperature_celsius: None,
            power_consumption_watts: None,
            frequency_actual_mhz: 0,
            frequency_max_mhz: 2400,
        };
        
        match self.architecture {
            ArchType::X86_64 => self.read_x86_64_counters(&mut metrics),
            ArchType::AArch64 => self.read_aarch64_counters(&mut metrics),
            ArchType::Riscv64 => self.read_riscv64_counters(&mut metrics),
        }
        
        // Calculate derived metrics
        if metrics.instructions > 0 {
            metrics.branch_misprediction_rate = 
                metrics.branch_mispredictions as f64 / metrics.branches as f64;
        }
        
        if metrics.l1_accesses > 0 {
            metrics.l1_miss_rate = 
                metrics.l1_misses as f64 / metrics.l1_accesses as f64;
        }
        
        if metrics.l2_accesses > 0 {
            metrics.l2_miss_rate = 
                metrics.l2_misses as f64 / metrics.l2_accesses as f64;
        }
        
        if metrics.l3_accesses > 0 {
            metrics.l3_miss_rate = 
                metrics.l3_misses as f64 / metrics.l3_accesses as f64;
        }
        
        metrics
    }
    
    /// Read x86_64 performance counters
    fn read_x86_64_counters(&self, metrics: &mut PerformanceMetrics) {
        #[cfg(target_arch = "x86_64")]
        {
            // Read fixed counters
            let mut cycles_msr: u64 = 0;
            let mut instructions_msr: u64 = 0;
            let mut ref_cycles_msr: u64 = 0;
            
            unsafe {
                core::arch::asm!(
                    "rdmsr",
                    in("rcx") 0x3C8, // FIXED_CTR0
                    out("rax") cycles_msr_low,
                    out("rdx") cycles_msr_high,
                );
                
                // This is simplified - would need to read all fixed counters
                metrics.cycles = cycles_msr;
                metrics.instructions = instructions_msr;
            }
            
            // Read general counters (simplified)
            // In real implementation, would read IA32_PERFEVTSELx and IA32_PMCx MSRs
        }
    }
    
    /// Read ARM64 performance counters
    fn read_aarch64_counters(&self, metrics: &mut PerformanceMetrics) {
        #[cfg(target_arch = "aarch64")]
        {
            // Read ARM64 PMU counters
            let mut pmcr: u64;
            unsafe {
                core::arch::asm!("mrs {}, pmcr_el0", out(reg) pmcr);
            }
            
            let mut cycles: u64 = 0;
            unsafe {
                core::arch::asm!("mrs {}, pmevtcntr0_el0", out(reg) cycles);
            }
            
            metrics.cycles = cycles;
            
            // Read instruction counter
            let mut instructions: u64 = 0;
            unsafe {
                core::arch::asm!("mrs {}, pmevtcntr1_el0", out(reg) instructions);
            }
            
            metrics.instructions = instructions;
        }
    }
    
    /// Read RISC-V performance counters
    fn read_riscv64_counters(&self, metrics: &mut PerformanceMetrics) {
        #[cfg(target_arch = "riscv64")]
        {
            // Read RISC-V fixed counters
            let mut cycle: u64 = 0;
            let mut time: u64 = 0;
            let mut instret: u64 = 0;
            
            unsafe {
                core::arch::asm!("csrr {}, 0xC00", out(reg) cycle);    // cycle
                core::arch::asm!("csrr {}, 0xC01", out(reg) time);      // time
                core::arch::asm!("csrr {}, 0xC02", out(reg) instret);   // instret
            }
            
            metrics.cycles = cycle;
            metrics.instructions = instret;
        }
    }
    
    /// Get PMU configuration
    pub fn get_config(&self) -> Option<&PmuConfig> {
        self.config.as_ref()
    }
    
    /// Get available counters
    pub fn get_counters(&self) -> &[PerformanceCounter] {
        &self.counters
    }
    
    /// Get available events
    pub fn get_events(&self) -> &[PerformanceEvent] {
        &self.event_list
    }
    
    /// Check if monitor is initialized
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }
    
    /// Reset performance counters
    pub fn reset_counters(&self) -> Result<(), KernelError> {
        info!("Resetting performance counters...");
        
        match self.architecture {
            ArchType::X86_64 => self.reset_x86_64_counters()?,
            ArchType::AArch64 => self.reset_aarch64_counters()?,
            ArchType::Riscv64 => self.reset_riscv64_counters()?,
        }
        
        Ok(())
    }
    
    /// Reset x86_64 counters
    fn reset_x86_64_counters(&self) -> Result<(), KernelError> {
        #[cfg(target_arch = "x86_64")]
        {
            // Reset PMU by writing to PMU control register
            unsafe {
                core::arch::asm!(
                    "mov {}, %rax",
                    "wrmsr",
                    in(reg) 0x1u64, // PMCR.P bit (reset)
                    in("rcx") 0x39Cu64, // IA32_PERF_GLOBAL_CTRL
                );
            }
        }
        
        Ok(())
    }
    
    /// Reset ARM64 counters
    fn reset_aarch64_counters(&self) -> Result<(), KernelError> {
        #[cfg(target_arch = "aarch64")]
        {
            // Reset ARM64 PMU
            unsafe {
                core::arch::asm!("msr pmcr_el0, {}", in(reg) 0x2u64); // PMCR.P bit (reset)
            }
        }
        
        Ok(())
    }
    
    /// Reset RISC-V counters
    fn reset_riscv64_counters(&self) -> Result<(), KernelError> {
        #[cfg(target_arch = "riscv64")]
        {
            // RISC-V counters are read-only, can't be reset directly
            // Just record current values as baseline
        }
        
        Ok(())
    }
}