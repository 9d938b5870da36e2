//! System Resource Monitor
//!
//! Comprehensive system resource monitoring with real-time capabilities,
//! minimal performance overhead, and advanced resource tracking.
//!
//! This module provides detailed monitoring of:
//! - CPU usage, per-core statistics, and performance metrics
//! - Memory usage (physical, virtual, kernel, cached)
//! - Disk I/O statistics and storage utilization
//! - Network resource monitoring and bandwidth usage
//! - System performance metrics and trends
//! - Resource alerts with configurable thresholds

use crate::log::{info, warn, error, debug};
use crate::{KernelError, Result};
use spin::{RwLock, Mutex, Once};
use core::sync::atomic::{AtomicU64, AtomicU32, AtomicUsize, AtomicBool, Ordering};
use alloc::vec::Vec;
use alloc::string::String;
use alloc::collections::VecDeque;
use core::time::Duration;
use bitflags::bitflags;

/// Resource monitor initialization
pub fn init() -> Result<()> {
    info!("Initializing System Resource Monitor...");
    
    // Initialize resource tracking systems
    init_cpu_monitoring()?;
    init_memory_monitoring()?;
    init_disk_monitoring()?;
    init_network_monitoring()?;
    init_performance_tracking()?;
    init_alert_system()?;
    init_realtime_collection()?;
    
    info!("System Resource Monitor initialized successfully");
    Ok(())
}

/// Resource monitor shutdown
pub fn shutdown() -> Result<()> {
    info!("Shutting down System Resource Monitor...");
    
    // Shutdown in reverse order
    shutdown_realtime_collection()?;
    shutdown_alert_system()?;
    shutdown_performance_tracking()?;
    shutdown_network_monitoring()?;
    shutdown_disk_monitoring()?;
    shutdown_memory_monitoring()?;
    shutdown_cpu_monitoring()?;
    
    info!("System Resource Monitor shutdown complete");
    Ok(())
}

/// CPU monitoring types and structures
pub mod cpu {
    use super::*;
    
    /// CPU core information
    #[derive(Debug, Clone, Copy)]
    pub struct CpuCoreInfo {
        pub core_id: u32,
        pub online: bool,
        pub frequency_mhz: u32,
        pub utilization_percent: f64,
        pub load_average_1m: f64,
        pub load_average_5m: f64,
        pub load_average_15m: f64,
    }
    
    /// CPU statistics per core
    #[derive(Debug, Clone, Copy)]
    pub struct CpuCoreStats {
        pub core_id: u32,
        pub user_time_ns: u64,
        pub system_time_ns: u64,
        pub idle_time_ns: u64,
        pub iowait_time_ns: u64,
        pub irq_time_ns: u64,
        pub softirq_time_ns: u64,
        pub context_switches: u64,
        pub interrupts: u64,
        pub cache_misses: u64,
        pub instructions_retired: u64,
        pub cycles: u64,
    }
    
    /// CPU performance metrics
    #[derive(Debug, Clone)]
    pub struct CpuPerformanceMetrics {
        pub total_utilization_percent: f64,
        pub average_core_utilization_percent: f64,
        pub max_core_utilization_percent: f64,
        pub min_core_utilization_percent: f64,
        pub cores_online: u32,
        pub total_cores: u32,
        pub cpu_temperature_celsius: Option<f32>,
        pub cpu_frequency_mhz: u32,
        pub load_average_1m: f64,
        pub load_average_5m: f64,
        pub load_average_15m: f64,
        pub processes_running: usize,
        pub processes_sleeping: usize,
        pub processes_total: usize,
    }
    
    /// CPU usage history for trend analysis
    pub struct CpuHistory {
        pub history: VecDeque<(u64, f64)>, // (timestamp, utilization)
        pub max_history_size: usize,
    }
    
    impl CpuHistory {
        const fn new(max_size: usize) -> Self {
            Self {
                history: VecDeque::new(),
                max_history_size: max_size,
            }
        }
        
        pub fn add_sample(&mut self, timestamp: u64, utilization: f64) {
            self.history.push_back((timestamp, utilization));
            if self.history.len() > self.max_history_size {
                self.history.pop_front();
            }
        }
        
        pub fn get_recent_avg(&self, duration_ms: u64) -> f64 {
            let now = crate::hal::timers::get_system_time_ms();
            let cutoff = now - duration_ms;
            
            let samples: Vec<f64> = self.history
                .iter()
                .filter(|(ts, _)| *ts >= cutoff)
                .map(|(_, util)| *util)
                .collect();
            
            if samples.is_empty() {
                0.0
            } else {
                samples.iter().sum::<f64>() / samples.len() as f64
            }
        }
        
        pub fn get_trend(&self) -> f64 {
            if self.history.len() < 2 {
                return 0.0;
            }
            
            let (first_ts, first_util) = self.history.front().unwrap();
            let (last_ts, last_util) = self.history.back().unwrap();
            
            let time_diff = (*last_ts - *first_ts) as f64;
            if time_diff == 0.0 {
                return 0.0;
            }
            
            (*last_util - *first_util) / time_diff * 1000.0 // per second
        }
    }
    
    /// Global CPU monitoring state
    static CPU_MONITORING_ENABLED: AtomicBool = AtomicBool::new(false);
    static CPU_CORES: RwLock<Vec<CpuCoreInfo>> = RwLock::new(Vec::new());
    static CPU_STATS: RwLock<Vec<CpuCoreStats>> = RwLock::new(Vec::new());
    static CPU_HISTORY: CpuHistory = CpuHistory::new(1000);
    static CPU_LAST_SAMPLE_TIME: AtomicU64 = AtomicU64::new(0);
    static CPU_SAMPLING_INTERVAL_MS: AtomicU64 = AtomicU64::new(1000);
    
    /// Initialize CPU monitoring
    pub fn init() -> Result<()> {
        debug!("Initializing CPU monitoring...");
        
        // Detect CPU cores
        detect_cpu_cores()?;
        
        // Initialize per-core statistics
        init_per_core_stats()?;
        
        // Start CPU monitoring
        CPU_MONITORING_ENABLED.store(true, Ordering::SeqCst);
        
        info!("CPU monitoring initialized for {} cores", get_core_count());
        Ok(())
    }
    
    /// Shutdown CPU monitoring
    pub fn shutdown() -> Result<()> {
        debug!("Shutting down CPU monitoring...");
        
        CPU_MONITORING_ENABLED.store(false, Ordering::SeqCst);
        
        let mut cores = CPU_CORES.write();
        cores.clear();
        
        let mut stats = CPU_STATS.write();
        stats.clear();
        
        Ok(())
    }
    
    /// Detect available CPU cores
    fn detect_cpu_cores() -> Result<()> {
        let mut cores = CPU_CORES.write();
        cores.clear();
        
        // In a real implementation, this would detect from HAL
        #[cfg(target_arch = "x86_64")]
        {
            // Simulate multi-core detection
            let core_count = 4; // Default for x86_64
            for core_id in 0..core_count {
                cores.push(CpuCoreInfo {
                    core_id,
                    online: true,
                    frequency_mhz: 2400 + (core_id as u32 * 100),
                    utilization_percent: 0.0,
                    load_average_1m: 0.0,
                    load_average_5m: 0.0,
                    load_average_15m: 0.0,
                });
            }
        }
        
        #[cfg(target_arch = "aarch64")]
        {
            // Simulate ARM64 core detection
            let core_count = 8; // Default for ARM64
            for core_id in 0..core_count {
                cores.push(CpuCoreInfo {
                    core_id,
                    online: true,
                    frequency_mhz: 2000 + (core_id as u32 * 50),
                    utilization_percent: 0.0,
                    load_average_1m: 0.0,
                    load_average_5m: 0.0,
                    load_average_15m: 0.0,
                });
            }
        }
        
        Ok(())
    }
    
    /// Initialize per-core statistics
    fn init_per_core_stats() -> Result<()> {
        let mut stats = CPU_STATS.write();
        stats.clear();
        
        let cores = CPU_CORES.read();
        for core in cores.iter() {
            stats.push(CpuCoreStats {
                core_id: core.core_id,
                user_time_ns: 0,
                system_time_ns: 0,
                idle_time_ns: 0,
                iowait_time_ns: 0,
                irq_time_ns: 0,
                softirq_time_ns: 0,
                context_switches: 0,
                interrupts: 0,
                cache_misses: 0,
                instructions_retired: 0,
                cycles: 0,
            });
        }
        
        Ok(())
    }
    
    /// Update CPU statistics
    pub fn update_stats() -> Result<()> {
        if !CPU_MONITORING_ENABLED.load(Ordering::SeqCst) {
            return Ok(());
        }
        
        let now = crate::hal::timers::get_system_time_ms();
        let interval = CPU_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst);
        
        // Check if it's time to sample
        let last_sample = CPU_LAST_SAMPLE_TIME.load(Ordering::SeqCst);
        if now - last_sample < interval {
            return Ok(());
        }
        
        CPU_LAST_SAMPLE_TIME.store(now, Ordering::SeqCst);
        
        // Update per-core stats
        update_per_core_stats()?;
        
        // Update system-wide metrics
        update_system_cpu_metrics()?;
        
        // Add to history
        let total_util = get_total_utilization();
        CPU_HISTORY.add_sample(now, total_util);
        
        Ok(())
    }
    
    /// Update per-core statistics
    fn update_per_core_stats() -> Result<()> {
        let mut stats = CPU_STATS.write();
        
        for core_stats in stats.iter_mut() {
            // Simulate CPU time collection
            // In real implementation, would read from /proc/stat or CPU performance counters
            let increment = 10_000_000; // 10ms in nanoseconds
            
            core_stats.user_time_ns += increment * 7 / 10; // 70% user
            core_stats.system_time_ns += increment * 2 / 10; // 20% system
            core_stats.idle_time_ns += increment * 1 / 10; // 10% idle
            core_stats.irq_time_ns += increment / 100; // 1% IRQ
            core_stats.context_switches += 100;
            core_stats.interrupts += 200;
            core_stats.cycles += 1_000_000_000;
            core_stats.instructions_retired += 800_000_000;
            
            // Calculate utilization for this core
            let total_time = core_stats.user_time_ns + core_stats.system_time_ns + 
                            core_stats.idle_time_ns + core_stats.iowait_time_ns + 
                            core_stats.irq_time_ns + core_stats.softirq_time_ns;
            
            if total_time > 0 {
                let busy_time = total_time - core_stats.idle_time_ns;
                core_stats.user_time_ns = busy_time; // Use this field for utilization percentage
            }
        }
        
        Ok(())
    }
    
    /// Update system-wide CPU metrics
    fn update_system_cpu_metrics() -> Result<()> {
        let mut cores = CPU_CORES.write();
        
        let cores_info = CPU_CORES.read();
        let cores_stats = CPU_STATS.read();
        
        let mut total_util = 0.0;
        let mut min_util = f64::INFINITY;
        let mut max_util = f64::NEG_INFINITY;
        let mut online_cores = 0;
        
        for (i, core) in cores.iter_mut().enumerate() {
            if core.online {
                online_cores += 1;
                if i < cores_stats.len() {
                    // Calculate utilization from stats
                    let util = (cores_stats[i].user_time_ns as f64 / 10_000_000_000.0 * 100.0)
                        .min(100.0)
                        .max(0.0);
                    
                    core.utilization_percent = util;
                    total_util += util;
                    min_util = min_util.min(util);
                    max_util = max_util.max(util);
                }
            }
        }
        
        // Update load averages (simplified calculation)
        let current_util = total_util / online_cores.max(1) as f64;
        let load_factor = current_util / 100.0;
        
        for core in cores.iter_mut() {
            if core.online {
                core.load_average_1m = core.load_average_1m * 0.9 + load_factor * 0.1;
                core.load_average_5m = core.load_average_5m * 0.95 + load_factor * 0.05;
                core.load_average_15m = core.load_average_15m * 0.98 + load_factor * 0.02;
            }
        }
        
        Ok(())
    }
    
    /// Get current CPU performance metrics
    pub fn get_performance_metrics() -> CpuPerformanceMetrics {
        let cores = CPU_CORES.read();
        let stats = CPU_STATS.read();
        
        let mut total_util = 0.0;
        let mut min_util = f64::INFINITY;
        let mut max_util = f64::NEG_INFINITY;
        let mut online_cores = 0;
        let mut processes_running = 0;
        let mut processes_sleeping = 0;
        
        for (i, core) in cores.iter().enumerate() {
            if core.online {
                online_cores += 1;
                let util = core.utilization_percent;
                total_util += util;
                min_util = min_util.min(util);
                max_util = max_util.max(util);
            }
        }
        
        let avg_util = if online_cores > 0 {
            total_util / online_cores as f64
        } else {
            0.0
        };
        
        // Simulate process counts
        processes_running = online_cores.max(1) * 2;
        processes_sleeping = online_cores.max(1) * 8;
        
        CpuPerformanceMetrics {
            total_utilization_percent: total_util,
            average_core_utilization_percent: avg_util,
            max_core_utilization_percent: if max_util.is_finite() { max_util } else { 0.0 },
            min_core_utilization_percent: if min_util.is_finite() { min_util } else { 0.0 },
            cores_online: online_cores,
            total_cores: cores.len() as u32,
            cpu_temperature_celsius: Some(45.0 + (avg_util as f32 * 0.5)), // Simulated
            cpu_frequency_mhz: cores.first().map_or(2400, |c| c.frequency_mhz),
            load_average_1m: cores.first().map_or(0.0, |c| c.load_average_1m),
            load_average_5m: cores.first().map_or(0.0, |c| c.load_average_5m),
            load_average_15m: cores.first().map_or(0.0, |c| c.load_average_15m),
            processes_running,
            processes_sleeping,
            processes_total: processes_running + processes_sleeping,
        }
    }
    
    /// Get total CPU utilization percentage
    pub fn get_total_utilization() -> f64 {
        let cores = CPU_CORES.read();
        let mut total_util = 0.0;
        let mut online_cores = 0;
        
        for core in cores.iter() {
            if core.online {
                online_cores += 1;
                total_util += core.utilization_percent;
            }
        }
        
        if online_cores > 0 {
            total_util / online_cores as f64
        } else {
            0.0
        }
    }
    
    /// Get per-core utilization
    pub fn get_per_core_utilization() -> Vec<f64> {
        let cores = CPU_CORES.read();
        cores.iter()
            .filter(|c| c.online)
            .map(|c| c.utilization_percent)
            .collect()
    }
    
    /// Get number of CPU cores
    pub fn get_core_count() -> usize {
        CPU_CORES.read().len()
    }
    
    /// Get CPU history for trend analysis
    pub fn get_history(duration_ms: u64) -> Vec<(u64, f64)> {
        let now = crate::hal::timers::get_system_time_ms();
        let cutoff = now - duration_ms;
        
        CPU_HISTORY.history
            .iter()
            .filter(|(ts, _)| *ts >= cutoff)
            .cloned()
            .collect()
    }
    
    /// Get recent average CPU utilization
    pub fn get_recent_avg(duration_ms: u64) -> f64 {
        CPU_HISTORY.get_recent_avg(duration_ms)
    }
    
    /// Get CPU trend (change per second)
    pub fn get_trend() -> f64 {
        CPU_HISTORY.get_trend()
    }
    
    /// Set CPU sampling interval
    pub fn set_sampling_interval(interval_ms: u64) {
        CPU_SAMPLING_INTERVAL_MS.store(interval_ms, Ordering::SeqCst);
    }
}

/// Memory monitoring types and structures
pub mod memory {
    use super::*;
    
    /// Memory statistics
    #[derive(Debug, Clone, Copy)]
    pub struct MemoryStats {
        pub total_bytes: u64,
        pub used_bytes: u64,
        pub free_bytes: u64,
        pub cached_bytes: u64,
        pub buffers_bytes: u64,
        pub swap_total_bytes: u64,
        pub swap_used_bytes: u64,
        pub swap_free_bytes: u64,
        pub usage_percent: f64,
        pub swap_usage_percent: f64,
    }
    
    /// Per-process memory information
    #[derive(Debug, Clone)]
    pub struct ProcessMemoryInfo {
        pub pid: u32,
        pub name: String,
        pub rss_bytes: u64,      // Resident Set Size
        pub vms_bytes: u64,      // Virtual Memory Size
        pub shared_bytes: u64,   // Shared memory
        pub text_bytes: u64,     // Text segment
        pub data_bytes: u64,     // Data segment
        pub stack_bytes: u64,    // Stack
    }
    
    /// Memory pressure information
    #[derive(Debug, Clone)]
    pub struct MemoryPressureInfo {
        pub pressure_level: MemoryPressureLevel,
        pub available_bytes: u64,
        pub reclaimable_bytes: u64,
        pub low_threshold_bytes: u64,
        pub critical_threshold_bytes: u64,
    }
    
    /// Memory pressure levels
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MemoryPressureLevel {
        Normal = 0,
        Low = 1,
        Medium = 2,
        High = 3,
        Critical = 4,
    }
    
    /// Memory statistics history
    pub struct MemoryHistory {
        pub history: VecDeque<(u64, MemoryStats)>,
        pub max_history_size: usize,
    }
    
    impl MemoryHistory {
        const fn new(max_size: usize) -> Self {
            Self {
                history: VecDeque::new(),
                max_history_size: max_size,
            }
        }
        
        pub fn add_sample(&mut self, timestamp: u64, stats: MemoryStats) {
            self.history.push_back((timestamp, stats));
            if self.history.len() > self.max_history_size {
                self.history.pop_front();
            }
        }
        
        pub fn get_recent_avg_usage(&self, duration_ms: u64) -> f64 {
            let now = crate::hal::timers::get_system_time_ms();
            let cutoff = now - duration_ms;
            
            let samples: Vec<f64> = self.history
                .iter()
                .filter(|(ts, _)| *ts >= cutoff)
                .map(|(_, stats)| stats.usage_percent)
                .collect();
            
            if samples.is_empty() {
                0.0
            } else {
                samples.iter().sum::<f64>() / samples.len() as f64
            }
        }
    }
    
    /// Global memory monitoring state
    static MEMORY_MONITORING_ENABLED: AtomicBool = AtomicBool::new(false);
    static MEMORY_STATS: RwLock<MemoryStats> = RwLock::new(MemoryStats {
        total_bytes: 8_000_000_000, // 8GB default
        used_bytes: 0,
        free_bytes: 8_000_000_000,
        cached_bytes: 0,
        buffers_bytes: 0,
        swap_total_bytes: 4_000_000_000, // 4GB swap default
        swap_used_bytes: 0,
        swap_free_bytes: 4_000_000_000,
        usage_percent: 0.0,
        swap_usage_percent: 0.0,
    });
    static MEMORY_HISTORY: MemoryHistory = MemoryHistory::new(1000);
    static MEMORY_PRESSURE: AtomicU8 = AtomicU8::new(MemoryPressureLevel::Normal as u8);
    static MEMORY_LAST_SAMPLE_TIME: AtomicU64 = AtomicU64::new(0);
    static MEMORY_SAMPLING_INTERVAL_MS: AtomicU64 = AtomicU64::new(2000);
    
    /// Initialize memory monitoring
    pub fn init() -> Result<()> {
        debug!("Initializing memory monitoring...");
        
        // Detect system memory
        detect_memory()?;
        
        // Start memory monitoring
        MEMORY_MONITORING_ENABLED.store(true, Ordering::SeqCst);
        
        let stats = MEMORY_STATS.read();
        info!("Memory monitoring initialized: {} GB total", stats.total_bytes / 1_000_000_000);
        
        Ok(())
    }
    
    /// Shutdown memory monitoring
    pub fn shutdown() -> Result<()> {
        debug!("Shutting down memory monitoring...");
        
        MEMORY_MONITORING_ENABLED.store(false, Ordering::SeqCst);
        
        Ok(())
    }
    
    /// Detect system memory configuration
    fn detect_memory() -> Result<()> {
        // In real implementation, would detect from HAL or firmware
        // For now, use reasonable defaults based on architecture
        
        #[cfg(target_arch = "x86_64")]
        {
            let mut stats = MEMORY_STATS.write();
            stats.total_bytes = 16_000_000_000; // 16GB
            stats.free_bytes = stats.total_bytes;
            stats.swap_total_bytes = 8_000_000_000; // 8GB
            stats.swap_free_bytes = stats.swap_total_bytes;
        }
        
        #[cfg(target_arch = "aarch64")]
        {
            let mut stats = MEMORY_STATS.write();
            stats.total_bytes = 8_000_000_000; // 8GB
            stats.free_bytes = stats.total_bytes;
            stats.swap_total_bytes = 4_000_000_000; // 4GB
            stats.swap_free_bytes = stats.swap_total_bytes;
        }
        
        Ok(())
    }
    
    /// Update memory statistics
    pub fn update_stats() -> Result<()> {
        if !MEMORY_MONITORING_ENABLED.load(Ordering::SeqCst) {
            return Ok(());
        }
        
        let now = crate::hal::timers::get_system_time_ms();
        let interval = MEMORY_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst);
        
        // Check if it's time to sample
        let last_sample = MEMORY_LAST_SAMPLE_TIME.load(Ordering::SeqCst);
        if now - last_sample < interval {
            return Ok(());
        }
        
        MEMORY_LAST_SAMPLE_TIME.store(now, Ordering::SeqCst);
        
        // Update memory statistics
        update_memory_statistics()?;
        
        // Update memory pressure level
        update_memory_pressure()?;
        
        // Add to history
        let stats = MEMORY_STATS.read();
        MEMORY_HISTORY.add_sample(now, *stats);
        
        Ok(())
    }
    
    /// Update memory statistics
    fn update_memory_statistics() -> Result<()> {
        let mut stats = MEMORY_STATS.write();
        
        // Simulate memory usage changes
        // In real implementation, would read from /proc/meminfo or HAL
        
        let system_time = crate::hal::timers::get_system_time_ms();
        let variation = ((system_time / 1000) % 100) as f64 / 100.0; // 0-1 variation
        
        let base_usage = 0.4 + (variation * 0.3); // 40-70% usage range
        stats.used_bytes = (stats.total_bytes as f64 * base_usage) as u64;
        stats.free_bytes = stats.total_bytes - stats.used_bytes;
        
        // Update cached and buffered memory
        stats.cached_bytes = (stats.total_bytes as f64 * 0.1) as u64;
        stats.buffers_bytes = (stats.total_bytes as f64 * 0.05) as u64;
        
        // Update swap usage
        let swap_usage = if stats.used_bytes > stats.total_bytes * 8 / 10 {
            (stats.used_bytes - stats.total_bytes * 8 / 10) / 10 // Use 10% of excess
        } else {
            0
        }.min(stats.swap_total_bytes);
        
        stats.swap_used_bytes = swap_usage;
        stats.swap_free_bytes = stats.swap_total_bytes - swap_usage;
        
        // Calculate percentages
        stats.usage_percent = (stats.used_bytes as f64 / stats.total_bytes as f64) * 100.0;
        stats.swap_usage_percent = if stats.swap_total_bytes > 0 {
            (stats.swap_used_bytes as f64 / stats.swap_total_bytes as f64) * 100.0
        } else {
            0.0
        };
        
        Ok(())
    }
    
    /// Update memory pressure level
    fn update_memory_pressure() -> Result<()> {
        let stats = MEMORY_STATS.read();
        
        let available_percent = (stats.free_bytes as f64 / stats.total_bytes as f64) * 100.0;
        let pressure_level = if available_percent < 5.0 {
            MemoryPressureLevel::Critical
        } else if available_percent < 10.0 {
            MemoryPressureLevel::High
        } else if available_percent < 20.0 {
            MemoryPressureLevel::Medium
        } else if available_percent < 30.0 {
            MemoryPressureLevel::Low
        } else {
            MemoryPressureLevel::Normal
        };
        
        MEMORY_PRESSURE.store(pressure_level as u8, Ordering::SeqCst);
        
        Ok(())
    }
    
    /// Get current memory statistics
    pub fn get_stats() -> MemoryStats {
        *MEMORY_STATS.read()
    }
    
    /// Get memory pressure information
    pub fn get_pressure_info() -> MemoryPressureInfo {
        let stats = MEMORY_STATS.read();
        let pressure_level = unsafe {
            core::mem::transmute(MEMORY_PRESSURE.load(Ordering::SeqCst))
        };
        
        let low_threshold = stats.total_bytes * 20 / 100; // 20% free
        let critical_threshold = stats.total_bytes * 10 / 100; // 10% free
        
        MemoryPressureInfo {
            pressure_level,
            available_bytes: stats.free_bytes,
            reclaimable_bytes: stats.cached_bytes + stats.buffers_bytes,
            low_threshold_bytes: low_threshold,
            critical_threshold_bytes: critical_threshold,
        }
    }
    
    /// Get memory pressure level
    pub fn get_pressure_level() -> MemoryPressureLevel {
        unsafe {
            core::mem::transmute(MEMORY_PRESSURE.load(Ordering::SeqCst))
        }
    }
    
    /// Get top memory consuming processes
    pub fn get_top_processes(limit: usize) -> Vec<ProcessMemoryInfo> {
        // Simulate process memory information
        // In real implementation, would read from /proc/[pid]/status
        
        let mut processes = Vec::new();
        for i in 0..limit.min(20) {
            processes.push(ProcessMemoryInfo {
                pid: 1000 + i,
                name: format!("process_{}", i),
                rss_bytes: 50_000_000 + (i as u64 * 10_000_000), // 50-250MB
                vms_bytes: 200_000_000 + (i as u64 * 50_000_000), // 200-1000MB
                shared_bytes: 5_000_000 + (i as u64 * 1_000_000),
                text_bytes: 10_000_000,
                data_bytes: 20_000_000 + (i as u64 * 5_000_000),
                stack_bytes: 2_000_000,
            });
        }
        
        // Sort by RSS (resident set size) descending
        processes.sort_by(|a, b| b.rss_bytes.cmp(&a.rss_bytes));
        processes
    }
    
    /// Get memory history for trend analysis
    pub fn get_history(duration_ms: u64) -> Vec<(u64, MemoryStats)> {
        let now = crate::hal::timers::get_system_time_ms();
        let cutoff = now - duration_ms;
        
        MEMORY_HISTORY.history
            .iter()
            .filter(|(ts, _)| *ts >= cutoff)
            .cloned()
            .collect()
    }
    
    /// Get recent average memory usage
    pub fn get_recent_avg_usage(duration_ms: u64) -> f64 {
        MEMORY_HISTORY.get_recent_avg_usage(duration_ms)
    }
    
    /// Set memory sampling interval
    pub fn set_sampling_interval(interval_ms: u64) {
        MEMORY_SAMPLING_INTERVAL_MS.store(interval_ms, Ordering::SeqCst);
    }
}

/// Disk I/O monitoring types and structures
pub mod disk {
    use super::*;
    
    /// Disk information
    #[derive(Debug, Clone)]
    pub struct DiskInfo {
        pub device_name: String,
        pub total_bytes: u64,
        pub used_bytes: u64,
        pub free_bytes: u64,
        pub usage_percent: f64,
        pub filesystem_type: String,
        pub mount_point: String,
    }
    
    /// Disk I/O statistics
    #[derive(Debug, Clone, Copy)]
    pub struct DiskIOStats {
        pub device_name: String,
        pub bytes_read: u64,
        pub bytes_written: u64,
        pub read_operations: u64,
        pub write_operations: u64,
        pub read_time_ms: u64,
        pub write_time_ms: u64,
        pub utilization_percent: f64,
        pub read_throughput_mb_s: f64,
        pub write_throughput_mb_s: f64,
        pub avg_read_time_ms: f64,
        pub avg_write_time_ms: f64,
    }
    
    /// Disk queue statistics
    #[derive(Debug, Clone, Copy)]
    pub struct DiskQueueStats {
        pub device_name: String,
        pub current_queue_depth: u32,
        pub avg_queue_depth: f64,
        pub total_operations: u64,
        pub completed_operations: u64,
        pub pending_operations: u32,
    }
    
    /// Global disk monitoring state
    static DISK_MONITORING_ENABLED: AtomicBool = AtomicBool::new(false);
    static DISK_DEVICES: RwLock<Vec<DiskInfo>> = RwLock::new(Vec::new());
    static DISK_IO_STATS: RwLock<Vec<DiskIOStats>> = RwLock::new(Vec::new());
    static DISK_QUEUE_STATS: RwLock<Vec<DiskQueueStats>> = RwLock::new(Vec::new());
    static DISK_LAST_SAMPLE_TIME: AtomicU64 = AtomicU64::new(0);
    static DISK_SAMPLING_INTERVAL_MS: AtomicU64 = AtomicU64::new(3000);
    
    /// Initialize disk monitoring
    pub fn init() -> Result<()> {
        debug!("Initializing disk monitoring...");
        
        // Detect disk devices
        detect_disk_devices()?;
        
        // Initialize I/O statistics
        init_io_statistics()?;
        
        // Start disk monitoring
        DISK_MONITORING_ENABLED.store(true, Ordering::SeqCst);
        
        let devices = DISK_DEVICES.read();
        info!("Disk monitoring initialized for {} devices", devices.len());
        
        Ok(())
    }
    
    /// Shutdown disk monitoring
    pub fn shutdown() -> Result<()> {
        debug!("Shutting down disk monitoring...");
        
        DISK_MONITORING_ENABLED.store(false, Ordering::SeqCst);
        
        let mut devices = DISK_DEVICES.write();
        devices.clear();
        
        let mut io_stats = DISK_IO_STATS.write();
        io_stats.clear();
        
        let mut queue_stats = DISK_QUEUE_STATS.write();
        queue_stats.clear();
        
        Ok(())
    }
    
    /// Detect available disk devices
    fn detect_disk_devices() -> Result<()> {
        let mut devices = DISK_DEVICES.write();
        devices.clear();
        
        // Simulate disk device detection
        // In real implementation, would scan /dev/ or use HAL
        
        devices.push(DiskInfo {
            device_name: "/dev/sda1".to_string(),
            total_bytes: 500_000_000_000, // 500GB
            used_bytes: 200_000_000_000, // 200GB used
            free_bytes: 300_000_000_000, // 300GB free
            usage_percent: 40.0,
            filesystem_type: "ext4".to_string(),
            mount_point: "/".to_string(),
        });
        
        devices.push(DiskInfo {
            device_name: "/dev/sda2".to_string(),
            total_bytes: 1_000_000_000_000, // 1TB
            used_bytes: 600_000_000_000, // 600GB used
            free_bytes: 400_000_000_000, // 400GB free
            usage_percent: 60.0,
            filesystem_type: "ext4".to_string(),
            mount_point: "/home".to_string(),
        });
        
        Ok(())
    }
    
    /// Initialize I/O statistics
    fn init_io_statistics() -> Result<()> {
        let mut io_stats = DISK_IO_STATS.write();
        let mut queue_stats = DISK_QUEUE_STATS.write();
        
        io_stats.clear();
        queue_stats.clear();
        
        let devices = DISK_DEVICES.read();
        for device in devices.iter() {
            io_stats.push(DiskIOStats {
                device_name: device.device_name.clone(),
                bytes_read: 0,
                bytes_written: 0,
                read_operations: 0,
                write_operations: 0,
                read_time_ms: 0,
                write_time_ms: 0,
                utilization_percent: 0.0,
                read_throughput_mb_s: 0.0,
                write_throughput_mb_s: 0.0,
                avg_read_time_ms: 0.0,
                avg_write_time_ms: 0.0,
            });
            
            queue_stats.push(DiskQueueStats {
                device_name: device.device_name.clone(),
                current_queue_depth: 0,
                avg_queue_depth: 0.0,
                total_operations: 0,
                completed_operations: 0,
                pending_operations: 0,
            });
        }
        
        Ok(())
    }
    
    /// Update disk I/O statistics
    pub fn update_stats() -> Result<()> {
        if !DISK_MONITORING_ENABLED.load(Ordering::SeqCst) {
            return Ok(());
        }
        
        let now = crate::hal::timers::get_system_time_ms();
        let interval = DISK_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst);
        
        // Check if it's time to sample
        let last_sample = DISK_LAST_SAMPLE_TIME.load(Ordering::SeqCst);
        if now - last_sample < interval {
            return Ok(());
        }
        
        DISK_LAST_SAMPLE_TIME.store(now, Ordering::SeqCst);
        
        // Update I/O statistics
        update_io_statistics()?;
        
        // Update queue statistics
        update_queue_statistics()?;
        
        Ok(())
    }
    
    /// Update I/O statistics
    fn update_io_statistics() -> Result<()> {
        let mut io_stats = DISK_IO_STATS.write();
        
        for stats in io_stats.iter_mut() {
            // Simulate I/O activity
            // In real implementation, would read from /sys/block/*/stat or similar
            
            let system_time = crate::hal::timers::get_system_time_ms();
            let activity_factor = ((system_time / 1000) % 10) as f64 / 10.0; // 0-1 variation
            
            let read_bytes = (10_000_000 * activity_factor) as u64; // 0-10MB
            let write_bytes = (15_000_000 * activity_factor) as u64; // 0-15MB
            
            let read_ops = (100 * activity_factor) as u64; // 0-100 ops
            let write_ops = (150 * activity_factor) as u64; // 0-150 ops
            
            stats.bytes_read += read_bytes;
            stats.bytes_written += write_bytes;
            stats.read_operations += read_ops;
            stats.write_operations += write_ops;
            
            stats.read_time_ms += (read_ops * 5) as u64; // 5ms per read op
            stats.write_time_ms += (write_ops * 8) as u64; // 8ms per write op
            
            // Calculate throughput (MB/s) and utilization
            if interval_to_throughput() > 0 {
                stats.read_throughput_mb_s = read_bytes as f64 / 1_000_000.0 / 
                    (DISK_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst) as f64 / 1000.0);
                stats.write_throughput_mb_s = write_bytes as f64 / 1_000_000.0 / 
                    (DISK_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst) as f64 / 1000.0);
            }
            
            if stats.read_operations > 0 {
                stats.avg_read_time_ms = stats.read_time_ms as f64 / stats.read_operations as f64;
            }
            
            if stats.write_operations > 0 {
                stats.avg_write_time_ms = stats.write_time_ms as f64 / stats.write_operations as f64;
            }
            
            // Calculate utilization (simplified)
            let total_time_ms = stats.read_time_ms + stats.write_time_ms;
            let sampling_interval_ms = DISK_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst);
            stats.utilization_percent = (total_time_ms as f64 / sampling_interval_ms as f64 * 100.0).min(100.0);
        }
        
        Ok(())
    }
    
    /// Update queue statistics
    fn update_queue_statistics() -> Result<()> {
        let mut queue_stats = DISK_QUEUE_STATS.write();
        
        for queue in queue_stats.iter_mut() {
            // Simulate queue depth changes
            let system_time = crate::hal::timers::get_system_time_ms();
            let load_factor = ((system_time / 1000) % 5) as u32; // 0-4 load
            
            queue.current_queue_depth = load_factor;
            
            // Simple moving average
            queue.avg_queue_depth = queue.avg_queue_depth * 0.9 + (load_factor as f64 * 0.1);
            
            queue.total_operations += (load_factor * 10) as u64;
            queue.completed_operations += (load_factor * 9) as u64; // 90% completion rate
            queue.pending_operations = (queue.total_operations - queue.completed_operations) as u32;
        }
        
        Ok(())
    }
    
    /// Get disk information
    pub fn get_disk_info() -> Vec<DiskInfo> {
        DISK_DEVICES.read().clone()
    }
    
    /// Get I/O statistics
    pub fn get_io_stats() -> Vec<DiskIOStats> {
        DISK_IO_STATS.read().clone()
    }
    
    /// Get queue statistics
    pub fn get_queue_stats() -> Vec<DiskQueueStats> {
        DISK_QUEUE_STATS.read().clone()
    }
    
    /// Get total disk throughput
    pub fn get_total_throughput() -> (f64, f64) {
        let io_stats = DISK_IO_STATS.read();
        let mut total_read = 0.0;
        let mut total_write = 0.0;
        
        for stats in io_stats.iter() {
            total_read += stats.read_throughput_mb_s;
            total_write += stats.write_throughput_mb_s;
        }
        
        (total_read, total_write)
    }
    
    /// Get disk utilization summary
    pub fn get_utilization_summary() -> f64 {
        let io_stats = DISK_IO_STATS.read();
        if io_stats.is_empty() {
            return 0.0;
        }
        
        let total_util: f64 = io_stats.iter().map(|s| s.utilization_percent).sum();
        total_util / io_stats.len() as f64
    }
    
    /// Helper function for throughput calculation
    fn interval_to_throughput() -> f64 {
        DISK_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst) as f64 / 1000.0
    }
    
    /// Set disk sampling interval
    pub fn set_sampling_interval(interval_ms: u64) {
        DISK_SAMPLING_INTERVAL_MS.store(interval_ms, Ordering::SeqCst);
    }
}

/// Network monitoring types and structures
pub mod network {
    use super::*;
    
    /// Network interface information
    #[derive(Debug, Clone)]
    pub struct NetworkInterfaceInfo {
        pub interface_name: String,
        pub is_up: bool,
        pub is_running: bool,
        pub mac_address: String,
        pub mtu: u32,
        pub speed_mbps: u32,
    }
    
    /// Network I/O statistics
    #[derive(Debug, Clone, Copy)]
    pub struct NetworkIOStats {
        pub interface_name: String,
        pub bytes_sent: u64,
        pub bytes_received: u64,
        pub packets_sent: u64,
        pub packets_received: u64,
        pub errors_in: u32,
        pub errors_out: u32,
        pub drops_in: u32,
        pub drops_out: u32,
        pub send_throughput_kbps: f64,
        pub receive_throughput_kbps: f64,
        pub utilization_percent: f64,
    }
    
    /// Network connection information
    #[derive(Debug, Clone)]
    pub struct NetworkConnectionInfo {
        pub protocol: String, // TCP, UDP, etc.
        pub local_address: String,
        pub remote_address: String,
        pub state: String, // ESTABLISHED, LISTEN, etc.
        pub pid: u32,
        pub process_name: String,
    }
    
    /// Network statistics per interface
    #[derive(Debug, Clone)]
    pub struct InterfaceNetworkStats {
        pub interface_name: String,
        pub io_stats: NetworkIOStats,
        pub connection_count: u32,
        pub listen_ports: Vec<u16>,
    }
    
    /// Global network monitoring state
    static NETWORK_MONITORING_ENABLED: AtomicBool = AtomicBool::new(false);
    static NETWORK_INTERFACES: RwLock<Vec<NetworkInterfaceInfo>> = RwLock::new(Vec::new());
    static NETWORK_IO_STATS: RwLock<Vec<NetworkIOStats>> = RwLock::new(Vec::new());
    static NETWORK_CONNECTIONS: RwLock<Vec<NetworkConnectionInfo>> = RwLock::new(Vec::new());
    static NETWORK_LAST_SAMPLE_TIME: AtomicU64 = AtomicU64::new(0);
    static NETWORK_SAMPLING_INTERVAL_MS: AtomicU64 = AtomicU64::new(2000);
    
    /// Initialize network monitoring
    pub fn init() -> Result<()> {
        debug!("Initializing network monitoring...");
        
        // Detect network interfaces
        detect_network_interfaces()?;
        
        // Initialize I/O statistics
        init_network_io_stats()?;
        
        // Initialize connections
        init_network_connections()?;
        
        // Start network monitoring
        NETWORK_MONITORING_ENABLED.store(true, Ordering::SeqCst);
        
        let interfaces = NETWORK_INTERFACES.read();
        info!("Network monitoring initialized for {} interfaces", interfaces.len());
        
        Ok(())
    }
    
    /// Shutdown network monitoring
    pub fn shutdown() -> Result<()> {
        debug!("Shutting down network monitoring...");
        
        NETWORK_MONITORING_ENABLED.store(false, Ordering::SeqCst);
        
        let mut interfaces = NETWORK_INTERFACES.write();
        interfaces.clear();
        
        let mut io_stats = NETWORK_IO_STATS.write();
        io_stats.clear();
        
        let mut connections = NETWORK_CONNECTIONS.write();
        connections.clear();
        
        Ok(())
    }
    
    /// Detect network interfaces
    fn detect_network_interfaces() -> Result<()> {
        let mut interfaces = NETWORK_INTERFACES.write();
        interfaces.clear();
        
        // Simulate network interface detection
        // In real implementation, would use HAL or scan /sys/class/net/
        
        interfaces.push(NetworkInterfaceInfo {
            interface_name: "eth0".to_string(),
            is_up: true,
            is_running: true,
            mac_address: "00:11:22:33:44:55".to_string(),
            mtu: 1500,
            speed_mbps: 1000,
        });
        
        interfaces.push(NetworkInterfaceInfo {
            interface_name: "wlan0".to_string(),
            is_up: true,
            is_running: true,
            mac_address: "00:aa:bb:cc:dd:ee".to_string(),
            mtu: 1500,
            speed_mbps: 150,
        });
        
        Ok(())
    }
    
    /// Initialize network I/O statistics
    fn init_network_io_stats() -> Result<()> {
        let mut io_stats = NETWORK_IO_STATS.write();
        io_stats.clear();
        
        let interfaces = NETWORK_INTERFACES.read();
        for interface in interfaces.iter() {
            io_stats.push(NetworkIOStats {
                interface_name: interface.interface_name.clone(),
                bytes_sent: 0,
                bytes_received: 0,
                packets_sent: 0,
                packets_received: 0,
                errors_in: 0,
                errors_out: 0,
                drops_in: 0,
                drops_out: 0,
                send_throughput_kbps: 0.0,
                receive_throughput_kbps: 0.0,
                utilization_percent: 0.0,
            });
        }
        
        Ok(())
    }
    
    /// Initialize network connections
    fn init_network_connections() -> Result<()> {
        let mut connections = NETWORK_CONNECTIONS.write();
        connections.clear();
        
        // Simulate some active connections
        connections.push(NetworkConnectionInfo {
            protocol: "TCP".to_string(),
            local_address: "192.168.1.100:80".to_string(),
            remote_address: "192.168.1.200:12345".to_string(),
            state: "ESTABLISHED".to_string(),
            pid: 1234,
            process_name: "nginx".to_string(),
        });
        
        connections.push(NetworkConnectionInfo {
            protocol: "TCP".to_string(),
            local_address: "192.168.1.100:22".to_string(),
            remote_address: "192.168.1.50:54321".to_string(),
            state: "ESTABLISHED".to_string(),
            pid: 1235,
            process_name: "sshd".to_string(),
        });
        
        connections.push(NetworkConnectionInfo {
            protocol: "TCP".to_string(),
            local_address: "0.0.0.0:80".to_string(),
            remote_address: "0.0.0.0:0".to_string(),
            state: "LISTEN".to_string(),
            pid: 1234,
            process_name: "nginx".to_string(),
        });
        
        Ok(())
    }
    
    /// Update network I/O statistics
    pub fn update_stats() -> Result<()> {
        if !NETWORK_MONITORING_ENABLED.load(Ordering::SeqCst) {
            return Ok(());
        }
        
        let now = crate::hal::timers::get_system_time_ms();
        let interval = NETWORK_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst);
        
        // Check if it's time to sample
        let last_sample = NETWORK_LAST_SAMPLE_TIME.load(Ordering::SeqCst);
        if now - last_sample < interval {
            return Ok(());
        }
        
        NETWORK_LAST_SAMPLE_TIME.store(now, Ordering::SeqCst);
        
        // Update I/O statistics
        update_network_io_statistics()?;
        
        // Update connection information
        update_network_connections()?;
        
        Ok(())
    }
    
    /// Update network I/O statistics
    fn update_network_io_statistics() -> Result<()> {
        let mut io_stats = NETWORK_IO_STATS.write();
        
        for stats in io_stats.iter_mut() {
            // Simulate network I/O activity
            // In real implementation, would read from /proc/net/dev or HAL
            
            let system_time = crate::hal::timers::get_system_time_ms();
            let activity_factor = ((system_time / 1000) % 20) as f64 / 20.0; // 0-1 variation
            
            let send_bytes = (500_000 * activity_factor) as u64; // 0-500KB
            let recv_bytes = (800_000 * activity_factor) as u64; // 0-800KB
            
            let send_packets = (500 * activity_factor) as u64; // 0-500 packets
            let recv_packets = (800 * activity_factor) as u64; // 0-800 packets
            
            stats.bytes_sent += send_bytes;
            stats.bytes_received += recv_bytes;
            stats.packets_sent += send_packets;
            stats.packets_received += recv_packets;
            
            // Add occasional errors and drops
            if activity_factor > 0.8 {
                stats.errors_in += 1;
                stats.errors_out += 1;
                stats.drops_in += 1;
                stats.drops_out += 1;
            }
            
            // Calculate throughput (kbps)
            let interval_seconds = NETWORK_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst) as f64 / 1000.0;
            if interval_seconds > 0.0 {
                stats.send_throughput_kbps = send_bytes as f64 / 1024.0 / interval_seconds;
                stats.receive_throughput_kbps = recv_bytes as f64 / 1024.0 / interval_seconds;
            }
            
            // Calculate utilization percentage
            let interface_speed_kbps = get_interface_speed_kbps(&stats.interface_name);
            if interface_speed_kbps > 0 {
                let max_throughput = interface_speed_kbps;
                let current_throughput = stats.send_throughput_kbps.max(stats.receive_throughput_kbps);
                stats.utilization_percent = (current_throughput / max_throughput * 100.0).min(100.0);
            }
        }
        
        Ok(())
    }
    
    /// Update network connections
    fn update_network_connections() -> Result<()> {
        let mut connections = NETWORK_CONNECTIONS.write();
        
        // Simulate connection state changes
        // In real implementation, would read from /proc/net/tcp, /proc/net/udp
        
        // Keep existing connections but update some states
        for conn in connections.iter_mut() {
            if conn.state == "ESTABLISHED" {
                // 5% chance connection drops
                let system_time = crate::hal::timers::get_system_time_ms();
                if system_time % 100 < 5 {
                    conn.state = "TIME_WAIT".to_string();
                }
            } else if conn.state == "TIME_WAIT" {
                // 50% chance connection closes
                let system_time = crate::hal::timers::get_system_time_ms();
                if system_time % 10 < 5 {
                    conn.state = "CLOSED".to_string();
                }
            }
        }
        
        // Remove closed connections
        connections.retain(|conn| conn.state != "CLOSED");
        
        Ok(())
    }
    
    /// Get network interface information
    pub fn get_interface_info() -> Vec<NetworkInterfaceInfo> {
        NETWORK_INTERFACES.read().clone()
    }
    
    /// Get network I/O statistics
    pub fn get_io_stats() -> Vec<NetworkIOStats> {
        NETWORK_IO_STATS.read().clone()
    }
    
    /// Get network connection information
    pub fn get_connections() -> Vec<NetworkConnectionInfo> {
        NETWORK_CONNECTIONS.read().clone()
    }
    
    /// Get network statistics per interface
    pub fn get_interface_stats() -> Vec<InterfaceNetworkStats> {
        let interfaces = NETWORK_INTERFACES.read();
        let io_stats = NETWORK_IO_STATS.read();
        let connections = NETWORK_CONNECTIONS.read();
        
        let mut interface_stats = Vec::new();
        
        for interface in interfaces.iter() {
            let io_stat = io_stats.iter()
                .find(|s| s.interface_name == interface.interface_name)
                .cloned()
                .unwrap_or_else(|| NetworkIOStats {
                    interface_name: interface.interface_name.clone(),
                    bytes_sent: 0,
                    bytes_received: 0,
                    packets_sent: 0,
                    packets_received: 0,
                    errors_in: 0,
                    errors_out: 0,
                    drops_in: 0,
                    drops_out: 0,
                    send_throughput_kbps: 0.0,
                    receive_throughput_kbps: 0.0,
                    utilization_percent: 0.0,
                });
            
            // Count connections for this interface
            let connection_count = connections.iter()
                .filter(|conn| {
                    // Simplified connection matching
                    conn.local_address.contains("192.168.1.100") && interface.interface_name == "eth0" ||
                    conn.local_address.contains("192.168.1.100") && interface.interface_name == "wlan0"
                })
                .count() as u32;
            
            // Get listen ports
            let listen_ports: Vec<u16> = connections.iter()
                .filter(|conn| conn.state == "LISTEN" && conn.local_address.starts_with("0.0.0.0:"))
                .filter_map(|conn| {
                    conn.local_address.split(':').nth(1)
                        .and_then(|port| port.parse().ok())
                })
                .collect();
            
            interface_stats.push(InterfaceNetworkStats {
                interface_name: interface.interface_name.clone(),
                io_stats: io_stat,
                connection_count,
                listen_ports,
            });
        }
        
        interface_stats
    }
    
    /// Get total network throughput
    pub fn get_total_throughput() -> (f64, f64) {
        let io_stats = NETWORK_IO_STATS.read();
        let mut total_send = 0.0;
        let mut total_recv = 0.0;
        
        for stats in io_stats.iter() {
            total_send += stats.send_throughput_kbps;
            total_recv += stats.receive_throughput_kbps;
        }
        
        (total_send, total_recv)
    }
    
    /// Get network utilization summary
    pub fn get_utilization_summary() -> f64 {
        let io_stats = NETWORK_IO_STATS.read();
        if io_stats.is_empty() {
            return 0.0;
        }
        
        let total_util: f64 = io_stats.iter().map(|s| s.utilization_percent).sum();
        total_util / io_stats.len() as f64
    }
    
    /// Get interface speed in kbps
    fn get_interface_speed_kbps(interface_name: &str) -> f64 {
        let interfaces = NETWORK_INTERFACES.read();
        
        for interface in interfaces.iter() {
            if interface.interface_name == interface_name {
                return (interface.speed_mbps as f64) * 1024.0; // Convert Mbps to kbps
            }
        }
        
        0.0
    }
    
    /// Set network sampling interval
    pub fn set_sampling_interval(interval_ms: u64) {
        NETWORK_SAMPLING_INTERVAL_MS.store(interval_ms, Ordering::SeqCst);
    }
}

/// Performance tracking and system metrics
pub mod performance {
    use super::*;
    
    /// System performance metrics
    #[derive(Debug, Clone, Copy)]
    pub struct SystemPerformanceMetrics {
        pub system_uptime_seconds: u64,
        pub boot_time_timestamp: u64,
        pub load_average_1m: f64,
        pub load_average_5m: f64,
        pub load_average_15m: f64,
        pub context_switches_per_second: f64,
        pub interrupts_per_second: f64,
        pub processes_created_per_second: f64,
        pub forks_per_second: f64,
        pub system_calls_per_second: f64,
        pub page_faults_per_second: f64,
        pub cpu_efficiency_score: f64,
        pub memory_efficiency_score: f64,
        pub io_efficiency_score: f64,
        pub overall_system_score: f64,
    }
    
    /// Performance history for trend analysis
    pub struct PerformanceHistory {
        pub history: VecDeque<(u64, SystemPerformanceMetrics)>,
        pub max_history_size: usize,
    }
    
    impl PerformanceHistory {
        const fn new(max_size: usize) -> Self {
            Self {
                history: VecDeque::new(),
                max_history_size: max_size,
            }
        }
        
        pub fn add_sample(&mut self, timestamp: u64, metrics: SystemPerformanceMetrics) {
            self.history.push_back((timestamp, metrics));
            if self.history.len() > self.max_history_size {
                self.history.pop_front();
            }
        }
        
        pub fn get_recent_trend(&self, duration_ms: u64) -> f64 {
            let now = crate::hal::timers::get_system_time_ms();
            let cutoff = now - duration_ms;
            
            let recent_samples: Vec<&SystemPerformanceMetrics> = self.history
                .iter()
                .filter(|(ts, _)| *ts >= cutoff)
                .map(|(_, metrics)| metrics)
                .collect();
            
            if recent_samples.len() < 2 {
                return 0.0;
            }
            
            let first_score = recent_samples.first().unwrap().overall_system_score;
            let last_score = recent_samples.last().unwrap().overall_system_score;
            
            if first_score > 0.0 {
                (last_score - first_score) / first_score * 100.0
            } else {
                0.0
            }
        }
    }
    
    /// Global performance monitoring state
    static PERFORMANCE_MONITORING_ENABLED: AtomicBool = AtomicBool::new(false);
    static PERFORMANCE_HISTORY: PerformanceHistory = PerformanceHistory::new(500);
    static SYSTEM_START_TIME: AtomicU64 = AtomicU64::new(0);
    static LAST_BOOT_TIME: AtomicU64 = AtomicU64::new(0);
    static LAST_CONTEXT_SWITCHES: AtomicU64 = AtomicU64::new(0);
    static LAST_INTERRUPTS: AtomicU64 = AtomicU64::new(0);
    static LAST_PROCESSES_CREATED: AtomicU64 = AtomicU64::new(0);
    static LAST_FORKS: AtomicU64 = AtomicU64::new(0);
    static LAST_SYSTEM_CALLS: AtomicU64 = AtomicU64::new(0);
    static LAST_PAGE_FAULTS: AtomicU64 = AtomicU64::new(0);
    static PERFORMANCE_SAMPLING_INTERVAL_MS: AtomicU64 = AtomicU64::new(5000);
    
    /// Initialize performance tracking
    pub fn init() -> Result<()> {
        debug!("Initializing performance tracking...");
        
        // Initialize start time
        let now = crate::hal::timers::get_system_time_ms();
        SYSTEM_START_TIME.store(now, Ordering::SeqCst);
        LAST_BOOT_TIME.store(now, Ordering::SeqCst);
        
        // Initialize performance counters
        init_performance_counters()?;
        
        // Start performance monitoring
        PERFORMANCE_MONITORING_ENABLED.store(true, Ordering::SeqCst);
        
        info!("Performance tracking initialized");
        
        Ok(())
    }
    
    /// Shutdown performance tracking
    pub fn shutdown() -> Result<()> {
        debug!("Shutting down performance tracking...");
        
        PERFORMANCE_MONITORING_ENABLED.store(false, Ordering::SeqCst);
        
        Ok(())
    }
    
    /// Initialize performance counters
    fn init_performance_counters() -> Result<()> {
        // Initialize baseline values
        LAST_CONTEXT_SWITCHES.store(1_000_000, Ordering::SeqCst);
        LAST_INTERRUPTS.store(500_000, Ordering::SeqCst);
        LAST_PROCESSES_CREATED.store(100, Ordering::SeqCst);
        LAST_FORKS.store(80, Ordering::SeqCst);
        LAST_SYSTEM_CALLS.store(1_000_000, Ordering::SeqCst);
        LAST_PAGE_FAULTS.store(10_000, Ordering::SeqCst);
        
        Ok(())
    }
    
    /// Update performance metrics
    pub fn update_metrics() -> Result<()> {
        if !PERFORMANCE_MONITORING_ENABLED.load(Ordering::SeqCst) {
            return Ok(());
        }
        
        let now = crate::hal::timers::get_system_time_ms();
        let interval = PERFORMANCE_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst);
        
        // Calculate time delta in seconds
        let system_start = SYSTEM_START_TIME.load(Ordering::SeqCst);
        let uptime_seconds = (now - system_start) / 1000;
        
        // Get current performance counters
        let current_context_switches = get_current_context_switches();
        let current_interrupts = get_current_interrupts();
        let current_processes = get_current_processes_created();
        let current_forks = get_current_forks();
        let current_syscalls = get_current_system_calls();
        let current_page_faults = get_current_page_faults();
        
        // Calculate rates
        let time_delta = interval as f64 / 1000.0;
        let context_switches_rate = (current_context_switches - LAST_CONTEXT_SWITCHES.load(Ordering::SeqCst)) as f64 / time_delta;
        let interrupts_rate = (current_interrupts - LAST_INTERRUPTS.load(Ordering::SeqCst)) as f64 / time_delta;
        let processes_rate = (current_processes - LAST_PROCESSES_CREATED.load(Ordering::SeqCst)) as f64 / time_delta;
        let forks_rate = (current_forks - LAST_FORKS.load(Ordering::SeqCst)) as f64 / time_delta;
        let syscalls_rate = (current_syscalls - LAST_SYSTEM_CALLS.load(Ordering::SeqCst)) as f64 / time_delta;
        let page_faults_rate = (current_page_faults - LAST_PAGE_FAULTS.load(Ordering::SeqCst)) as f64 / time_delta;
        
        // Update last values
        LAST_CONTEXT_SWITCHES.store(current_context_switches, Ordering::SeqCst);
        LAST_INTERRUPTS.store(current_interrupts, Ordering::SeqCst);
        LAST_PROCESSES_CREATED.store(current_processes, Ordering::SeqCst);
        LAST_FORKS.store(current_forks, Ordering::SeqCst);
        LAST_SYSTEM_CALLS.store(current_syscalls, Ordering::SeqCst);
        LAST_PAGE_FAULTS.store(current_page_faults, Ordering::SeqCst);
        
        // Get load averages from CPU monitoring
        let cpu_metrics = super::cpu::get_performance_metrics();
        
        // Calculate efficiency scores
        let cpu_efficiency = calculate_cpu_efficiency(context_switches_rate, syscalls_rate);
        let memory_efficiency = calculate_memory_efficiency(page_faults_rate);
        let io_efficiency = calculate_io_efficiency();
        let overall_score = (cpu_efficiency + memory_efficiency + io_efficiency) / 3.0;
        
        // Create performance metrics
        let metrics = SystemPerformanceMetrics {
            system_uptime_seconds: uptime_seconds,
            boot_time_timestamp: LAST_BOOT_TIME.load(Ordering::SeqCst),
            load_average_1m: cpu_metrics.load_average_1m,
            load_average_5m: cpu_metrics.load_average_5m,
            load_average_15m: cpu_metrics.load_average_15m,
            context_switches_per_second: context_switches_rate,
            interrupts_per_second: interrupts_rate,
            processes_created_per_second: processes_rate,
            forks_per_second: forks_rate,
            system_calls_per_second: syscalls_rate,
            page_faults_per_second: page_faults_rate,
            cpu_efficiency_score: cpu_efficiency,
            memory_efficiency_score: memory_efficiency,
            io_efficiency_score: io_efficiency,
            overall_system_score: overall_score,
        };
        
        // Add to history
        PERFORMANCE_HISTORY.add_sample(now, metrics);
        
        Ok(())
    }
    
    /// Get current system performance metrics
    pub fn get_performance_metrics() -> SystemPerformanceMetrics {
        let history = &PERFORMANCE_HISTORY.history;
        if let Some((_, metrics)) = history.back() {
            *metrics
        } else {
            // Return default metrics if no data available
            SystemPerformanceMetrics {
                system_uptime_seconds: 0,
                boot_time_timestamp: 0,
                load_average_1m: 0.0,
                load_average_5m: 0.0,
                load_average_15m: 0.0,
                context_switches_per_second: 0.0,
                interrupts_per_second: 0.0,
                processes_created_per_second: 0.0,
                forks_per_second: 0.0,
                system_calls_per_second: 0.0,
                page_faults_per_second: 0.0,
                cpu_efficiency_score: 0.0,
                memory_efficiency_score: 0.0,
                io_efficiency_score: 0.0,
                overall_system_score: 0.0,
            }
        }
    }
    
    /// Get performance history
    pub fn get_history(duration_ms: u64) -> Vec<(u64, SystemPerformanceMetrics)> {
        let now = crate::hal::timers::get_system_time_ms();
        let cutoff = now - duration_ms;
        
        PERFORMANCE_HISTORY.history
            .iter()
            .filter(|(ts, _)| *ts >= cutoff)
            .cloned()
            .collect()
    }
    
    /// Get performance trend
    pub fn get_trend(duration_ms: u64) -> f64 {
        PERFORMANCE_HISTORY.get_recent_trend(duration_ms)
    }
    
    /// Get current context switches
    fn get_current_context_switches() -> u64 {
        // Simulate context switch counting
        let system_time = crate::hal::timers::get_system_time_ms();
        (system_time / 1000) * 1000 + (system_time % 1000) * 10
    }
    
    /// Get current interrupts
    fn get_current_interrupts() -> u64 {
        // Simulate interrupt counting
        let system_time = crate::hal::timers::get_system_time_ms();
        (system_time / 1000) * 500 + (system_time % 1000) * 5
    }
    
    /// Get current processes created
    fn get_current_processes_created() -> u64 {
        // Simulate process creation counting
        100 + (crate::hal::timers::get_system_time_ms() / 1000) * 2
    }
    
    /// Get current forks
    fn get_current_forks() -> u64 {
        // Simulate fork counting
        80 + (crate::hal::timers::get_system_time_ms() / 1000) * 1
    }
    
    /// Get current system calls
    fn get_current_system_calls() -> u64 {
        // Simulate system call counting
        (crate::hal::timers::get_system_time_ms() / 1000) * 10000
    }
    
    /// Get current page faults
    fn get_current_page_faults() -> u64 {
        // Simulate page fault counting
        10000 + (crate::hal::timers::get_system_time_ms() / 1000) * 50
    }
    
    /// Calculate CPU efficiency
    fn calculate_cpu_efficiency(context_switches_rate: f64, syscalls_rate: f64) -> f64 {
        // Higher rates of context switches and syscalls can indicate inefficiency
        let context_switch_penalty = (context_switches_rate / 1000.0).min(0.3); // Max 30% penalty
        let syscall_penalty = (syscalls_rate / 100000.0).min(0.2); // Max 20% penalty
        
        (1.0 - context_switch_penalty - syscall_penalty).max(0.0) * 100.0
    }
    
    /// Calculate memory efficiency
    fn calculate_memory_efficiency(page_faults_rate: f64) -> f64 {
        // Higher page fault rate indicates memory inefficiency
        let page_fault_penalty = (page_faults_rate / 1000.0).min(0.4); // Max 40% penalty
        
        (1.0 - page_fault_penalty).max(0.0) * 100.0
    }
    
    /// Calculate I/O efficiency
    fn calculate_io_efficiency() -> f64 {
        // Get I/O utilization from disk monitoring
        let disk_util = super::disk::get_utilization_summary();
        let network_util = super::network::get_utilization_summary();
        
        // Lower utilization is generally better (less contention)
        let avg_util = (disk_util + network_util) / 2.0;
        
        if avg_util < 50.0 {
            100.0 // Excellent
        } else if avg_util < 70.0 {
            80.0 // Good
        } else if avg_util < 85.0 {
            60.0 // Fair
        } else {
            40.0 // Poor
        }
    }
    
    /// Set performance sampling interval
    pub fn set_sampling_interval(interval_ms: u64) {
        PERFORMANCE_SAMPLING_INTERVAL_MS.store(interval_ms, Ordering::SeqCst);
    }
}

/// Resource alerting and threshold management
pub mod alerts {
    use super::*;
    
    /// Resource alert
    #[derive(Debug, Clone)]
    pub struct ResourceAlert {
        pub id: u64,
        pub alert_type: ResourceAlertType,
        pub severity: AlertSeverity,
        pub resource: String,
        pub current_value: f64,
        pub threshold_value: f64,
        pub threshold_type: ThresholdType,
        pub message: String,
        pub timestamp: u64,
        pub acknowledged: bool,
        pub resolved_at: Option<u64>,
    }
    
    /// Resource alert types
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ResourceAlertType {
        CpuHigh = 0,
        CpuCritical = 1,
        MemoryHigh = 2,
        MemoryCritical = 3,
        DiskHigh = 4,
        DiskCritical = 5,
        NetworkHigh = 6,
        NetworkCritical = 7,
        ProcessCountHigh = 8,
        Custom = 9,
    }
    
    /// Alert severity levels
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AlertSeverity {
        Info = 0,
        Warning = 1,
        Error = 2,
        Critical = 3,
        Emergency = 4,
    }
    
    /// Threshold types
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ThresholdType {
        Absolute = 0,
        Percentage = 1,
        Rate = 2,
    }
    
    /// Resource threshold configuration
    #[derive(Debug, Clone)]
    pub struct ResourceThreshold {
        pub resource: String,
        pub alert_type: ResourceAlertType,
        pub warning_threshold: f64,
        pub critical_threshold: f64,
        pub threshold_type: ThresholdType,
        pub enabled: bool,
        pub cooldown_seconds: u64,
        pub last_triggered: Option<u64>,
    }
    
    /// Alert statistics
    #[derive(Debug, Clone, Copy)]
    pub struct AlertStatistics {
        pub total_alerts: u64,
        pub active_alerts: u64,
        pub resolved_alerts: u64,
        pub critical_alerts: u64,
        pub warning_alerts: u64,
        pub last_alert_time: Option<u64>,
    }
    
    /// Global alert system state
    static ALERT_SYSTEM_ENABLED: AtomicBool = AtomicBool::new(false);
    static ALERTS: RwLock<Vec<ResourceAlert>> = RwLock::new(Vec::new());
    static THRESHOLDS: RwLock<Vec<ResourceThreshold>> = RwLock::new(Vec::new());
    static ALERT_STATS: AtomicU64 = AtomicU64::new(0);
    static NEXT_ALERT_ID: AtomicU64 = AtomicU64::new(1);
    
    /// Initialize alert system
    pub fn init() -> Result<()> {
        debug!("Initializing resource alert system...");
        
        // Set up default thresholds
        setup_default_thresholds()?;
        
        // Start alert system
        ALERT_SYSTEM_ENABLED.store(true, Ordering::SeqCst);
        
        info!("Resource alert system initialized");
        
        Ok(())
    }
    
    /// Shutdown alert system
    pub fn shutdown() -> Result<()> {
        debug!("Shutting down resource alert system...");
        
        ALERT_SYSTEM_ENABLED.store(false, Ordering::SeqCst);
        
        let mut alerts = ALERTS.write();
        alerts.clear();
        
        let mut thresholds = THRESHOLDS.write();
        thresholds.clear();
        
        Ok(())
    }
    
    /// Set up default resource thresholds
    fn setup_default_thresholds() -> Result<()> {
        let mut thresholds = THRESHOLDS.write();
        thresholds.clear();
        
        // CPU thresholds
        thresholds.push(ResourceThreshold {
            resource: "cpu_utilization".to_string(),
            alert_type: ResourceAlertType::CpuHigh,
            warning_threshold: 70.0,
            critical_threshold: 90.0,
            threshold_type: ThresholdType::Percentage,
            enabled: true,
            cooldown_seconds: 300,
            last_triggered: None,
        });
        
        thresholds.push(ResourceThreshold {
            resource: "cpu_utilization".to_string(),
            alert_type: ResourceAlertType::CpuCritical,
            warning_threshold: 90.0,
            critical_threshold: 95.0,
            threshold_type: ThresholdType::Percentage,
            enabled: true,
            cooldown_seconds: 120,
            last_triggered: None,
        });
        
        // Memory thresholds
        thresholds.push(ResourceThreshold {
            resource: "memory_utilization".to_string(),
            alert_type: ResourceAlertType::MemoryHigh,
            warning_threshold: 80.0,
            critical_threshold: 95.0,
            threshold_type: ThresholdType::Percentage,
            enabled: true,
            cooldown_seconds: 300,
            last_triggered: None,
        });
        
        thresholds.push(ResourceThreshold {
            resource: "memory_utilization".to_string(),
            alert_type: ResourceAlertType::MemoryCritical,
            warning_threshold: 95.0,
            critical_threshold: 98.0,
            threshold_type: ThresholdType::Percentage,
            enabled: true,
            cooldown_seconds: 120,
            last_triggered: None,
        });
        
        // Disk thresholds
        thresholds.push(ResourceThreshold {
            resource: "disk_utilization".to_string(),
            alert_type: ResourceAlertType::DiskHigh,
            warning_threshold: 85.0,
            critical_threshold: 95.0,
            threshold_type: ThresholdType::Percentage,
            enabled: true,
            cooldown_seconds: 600,
            last_triggered: None,
        });
        
        thresholds.push(ResourceThreshold {
            resource: "disk_utilization".to_string(),
            alert_type: ResourceAlertType::DiskCritical,
            warning_threshold: 95.0,
            critical_threshold: 99.0,
            threshold_type: ThresholdType::Percentage,
            enabled: true,
            cooldown_seconds: 300,
            last_triggered: None,
        });
        
        // Network thresholds
        thresholds.push(ResourceThreshold {
            resource: "network_utilization".to_string(),
            alert_type: ResourceAlertType::NetworkHigh,
            warning_threshold: 70.0,
            critical_threshold: 90.0,
            threshold_type: ThresholdType::Percentage,
            enabled: true,
            cooldown_seconds: 300,
            last_triggered: None,
        });
        
        Ok(())
    }
    
    /// Check all resource thresholds
    pub fn check_thresholds() -> Result<()> {
        if !ALERT_SYSTEM_ENABLED.load(Ordering::SeqCst) {
            return Ok(());
        }
        
        let now = crate::hal::timers::get_system_time_ms();
        
        // Check CPU thresholds
        check_cpu_thresholds(now)?;
        
        // Check memory thresholds
        check_memory_thresholds(now)?;
        
        // Check disk thresholds
        check_disk_thresholds(now)?;
        
        // Check network thresholds
        check_network_thresholds(now)?;
        
        Ok(())
    }
    
    /// Check CPU thresholds
    fn check_cpu_thresholds(now: u64) -> Result<()> {
        let cpu_metrics = super::cpu::get_performance_metrics();
        let utilization = cpu_metrics.total_utilization_percent;
        
        check_threshold(
            "cpu_utilization".to_string(),
            ResourceAlertType::CpuHigh,
            utilization,
            now,
        )?;
        
        check_threshold(
            "cpu_utilization".to_string(),
            ResourceAlertType::CpuCritical,
            utilization,
            now,
        )?;
        
        Ok(())
    }
    
    /// Check memory thresholds
    fn check_memory_thresholds(now: u64) -> Result<()> {
        let memory_stats = super::memory::get_stats();
        let utilization = memory_stats.usage_percent;
        
        check_threshold(
            "memory_utilization".to_string(),
            ResourceAlertType::MemoryHigh,
            utilization,
            now,
        )?;
        
        check_threshold(
            "memory_utilization".to_string(),
            ResourceAlertType::MemoryCritical,
            utilization,
            now,
        )?;
        
        Ok(())
    }
    
    /// Check disk thresholds
    fn check_disk_thresholds(now: u64) -> Result<()> {
        let disk_info = super::disk::get_disk_info();
        let total_usage: f64 = disk_info.iter().map(|d| d.usage_percent).sum();
        let avg_usage = if !disk_info.is_empty() {
            total_usage / disk_info.len() as f64
        } else {
            0.0
        };
        
        check_threshold(
            "disk_utilization".to_string(),
            ResourceAlertType::DiskHigh,
            avg_usage,
            now,
        )?;
        
        check_threshold(
            "disk_utilization".to_string(),
            ResourceAlertType::DiskCritical,
            avg_usage,
            now,
        )?;
        
        Ok(())
    }
    
    /// Check network thresholds
    fn check_network_thresholds(now: u64) -> Result<()> {
        let network_util = super::network::get_utilization_summary();
        
        check_threshold(
            "network_utilization".to_string(),
            ResourceAlertType::NetworkHigh,
            network_util,
            now,
        )?;
        
        check_threshold(
            "network_utilization".to_string(),
            ResourceAlertType::NetworkCritical,
            network_util,
            now,
        )?;
        
        Ok(())
    }
    
    /// Check a specific threshold
    fn check_threshold(
        resource: String,
        alert_type: ResourceAlertType,
        current_value: f64,
        now: u64,
    ) -> Result<()> {
        let mut thresholds = THRESHOLDS.write();
        
        for threshold in thresholds.iter_mut() {
            if threshold.resource == resource && threshold.alert_type == alert_type {
                if !threshold.enabled {
                    continue;
                }
                
                let should_alert = match alert_type {
                    ResourceAlertType::CpuHigh | ResourceAlertType::MemoryHigh | 
                    ResourceAlertType::DiskHigh | ResourceAlertType::NetworkHigh => {
                        current_value > threshold.warning_threshold
                    }
                    ResourceAlertType::CpuCritical | ResourceAlertType::MemoryCritical |
                    ResourceAlertType::DiskCritical | ResourceAlertType::NetworkCritical => {
                        current_value > threshold.critical_threshold
                    }
                    _ => false,
                };
                
                if should_alert {
                    // Check cooldown period
                    if let Some(last_triggered) = threshold.last_triggered {
                        if now - last_triggered < threshold.cooldown_seconds * 1000 {
                            continue; // Still in cooldown
                        }
                    }
                    
                    // Generate alert
                    let severity = match alert_type {
                        ResourceAlertType::CpuCritical | ResourceAlertType::MemoryCritical |
                        ResourceAlertType::DiskCritical | ResourceAlertType::NetworkCritical => {
                            AlertSeverity::Critical
                        }
                        ResourceAlertType::CpuHigh | ResourceAlertType::MemoryHigh |
                        ResourceAlertType::DiskHigh | ResourceAlertType::NetworkHigh => {
                            AlertSeverity::Warning
                        }
                        _ => AlertSeverity::Info,
                    };
                    
                    generate_alert(
                        alert_type,
                        severity,
                        resource.clone(),
                        current_value,
                        threshold.critical_threshold,
                        threshold.threshold_type,
                        format!("{} exceeded threshold: {:.1}", resource, current_value),
                    )?;
                    
                    // Update last triggered time
                    threshold.last_triggered = Some(now);
                }
            }
        }
        
        Ok(())
    }
    
    /// Generate a resource alert
    fn generate_alert(
        alert_type: ResourceAlertType,
        severity: AlertSeverity,
        resource: String,
        current_value: f64,
        threshold_value: f64,
        threshold_type: ThresholdType,
        message: String,
    ) -> Result<()> {
        let alert_id = NEXT_ALERT_ID.fetch_add(1, Ordering::SeqCst);
        let timestamp = crate::hal::timers::get_system_time_ms();
        
        let alert = ResourceAlert {
            id: alert_id,
            alert_type,
            severity,
            resource,
            current_value,
            threshold_value,
            threshold_type,
            message,
            timestamp,
            acknowledged: false,
            resolved_at: None,
        };
        
        {
            let mut alerts = ALERTS.write();
            alerts.push(alert);
            
            // Limit alert history
            let max_alerts = 1000;
            if alerts.len() > max_alerts {
                alerts.remove(0);
            }
        }
        
        ALERT_STATS.fetch_add(1, Ordering::SeqCst);
        
        info!("Resource alert generated: {} (ID: {})", message, alert_id);
        
        Ok(())
    }
    
    /// Get all active alerts
    pub fn get_active_alerts() -> Vec<ResourceAlert> {
        ALERTS.read()
            .iter()
            .filter(|alert| alert.resolved_at.is_none())
            .cloned()
            .collect()
    }
    
    /// Get all alerts
    pub fn get_all_alerts() -> Vec<ResourceAlert> {
        ALERTS.read().clone()
    }
    
    /// Get alert statistics
    pub fn get_alert_statistics() -> AlertStatistics {
        let alerts = ALERTS.read();
        
        let total_alerts = alerts.len() as u64;
        let active_alerts = alerts.iter().filter(|a| a.resolved_at.is_none()).count() as u64;
        let resolved_alerts = alerts.iter().filter(|a| a.resolved_at.is_some()).count() as u64;
        let critical_alerts = alerts.iter().filter(|a| a.severity == AlertSeverity::Critical).count() as u64;
        let warning_alerts = alerts.iter().filter(|a| a.severity == AlertSeverity::Warning).count() as u64;
        let last_alert_time = alerts.iter().map(|a| a.timestamp).max();
        
        AlertStatistics {
            total_alerts,
            active_alerts,
            resolved_alerts,
            critical_alerts,
            warning_alerts,
            last_alert_time,
        }
    }
    
    /// Acknowledge an alert
    pub fn acknowledge_alert(alert_id: u64) -> Result<()> {
        let mut alerts = ALERTS.write();
        
        for alert in alerts.iter_mut() {
            if alert.id == alert_id && alert.resolved_at.is_none() {
                alert.acknowledged = true;
                break;
            }
        }
        
        Ok(())
    }
    
    /// Resolve an alert
    pub fn resolve_alert(alert_id: u64) -> Result<()> {
        let mut alerts = ALERTS.write();
        let now = crate::hal::timers::get_system_time_ms();
        
        for alert in alerts.iter_mut() {
            if alert.id == alert_id && alert.resolved_at.is_none() {
                alert.resolved_at = Some(now);
                break;
            }
        }
        
        Ok(())
    }
    
    /// Add custom threshold
    pub fn add_threshold(threshold: ResourceThreshold) -> Result<()> {
        let mut thresholds = THRESHOLDS.write();
        thresholds.push(threshold);
        
        info!("Custom threshold added for resource: {}", threshold.resource);
        
        Ok(())
    }
    
    /// Remove threshold
    pub fn remove_threshold(resource: &str, alert_type: ResourceAlertType) -> Result<()> {
        let mut thresholds = THRESHOLDS.write();
        thresholds.retain(|t| !(t.resource == resource && t.alert_type == alert_type));
        
        info!("Threshold removed for resource: {}", resource);
        
        Ok(())
    }
    
    /// Get all thresholds
    pub fn get_thresholds() -> Vec<ResourceThreshold> {
        THRESHOLDS.read().clone()
    }
}

/// Real-time resource monitoring
pub mod realtime {
    use super::*;
    
    /// Real-time monitoring session
    pub struct MonitoringSession {
        pub session_id: u64,
        pub start_time: u64,
        pub duration_ms: u64,
        pub sampling_interval_ms: u64,
        pub resources_monitored: Vec<String>,
        pub callbacks: Vec<Box<dyn ResourceMonitorCallback + Send + Sync>>,
        pub active: bool,
    }
    
    /// Real-time monitoring callback interface
    pub trait ResourceMonitorCallback: Send + Sync {
        fn on_resource_update(&self, resource_type: &str, data: &ResourceSnapshot);
        fn on_alert(&self, alert: &super::alerts::ResourceAlert);
    }
    
    /// Resource snapshot for real-time monitoring
    #[derive(Debug, Clone)]
    pub struct ResourceSnapshot {
        pub timestamp: u64,
        pub cpu_metrics: Option<super::cpu::CpuPerformanceMetrics>,
        pub memory_stats: Option<super::memory::MemoryStats>,
        pub disk_io_stats: Option<Vec<super::disk::DiskIOStats>>,
        pub network_io_stats: Option<Vec<super::network::NetworkIOStats>>,
        pub performance_metrics: Option<super::performance::SystemPerformanceMetrics>,
        pub resource_pressure: Option<super::memory::MemoryPressureInfo>,
    }
    
    /// Global real-time monitoring state
    static REALTIME_MONITORING_ENABLED: AtomicBool = AtomicBool::new(false);
    static MONITORING_SESSIONS: RwLock<Vec<MonitoringSession>> = RwLock::new(Vec::new());
    static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);
    static REALTIME_SAMPLING_INTERVAL_MS: AtomicU64 = AtomicU64::new(500);
    static LAST_REALTIME_SAMPLE: AtomicU64 = AtomicU64::new(0);
    
    /// Initialize real-time monitoring
    pub fn init() -> Result<()> {
        debug!("Initializing real-time resource monitoring...");
        
        // Start real-time monitoring
        REALTIME_MONITORING_ENABLED.store(true, Ordering::SeqCst);
        
        info!("Real-time resource monitoring initialized");
        
        Ok(())
    }
    
    /// Shutdown real-time monitoring
    pub fn shutdown() -> Result<()> {
        debug!("Shutting down real-time resource monitoring...");
        
        REALTIME_MONITORING_ENABLED.store(false, Ordering::SeqCst);
        
        let mut sessions = MONITORING_SESSIONS.write();
        for session in sessions.iter_mut() {
            session.active = false;
        }
        
        info!("Real-time resource monitoring shutdown complete");
        
        Ok(())
    }
    
    /// Create a new monitoring session
    pub fn create_session(
        duration_ms: u64,
        sampling_interval_ms: u64,
        resources_monitored: Vec<String>,
        callbacks: Vec<Box<dyn ResourceMonitorCallback + Send + Sync>>,
    ) -> Result<u64> {
        let session_id = NEXT_SESSION_ID.fetch_add(1, Ordering::SeqCst);
        let start_time = crate::hal::timers::get_system_time_ms();
        
        let session = MonitoringSession {
            session_id,
            start_time,
            duration_ms,
            sampling_interval_ms,
            resources_monitored,
            callbacks,
            active: true,
        };
        
        let mut sessions = MONITORING_SESSIONS.write();
        sessions.push(session);
        
        info!("Created real-time monitoring session: {}", session_id);
        
        Ok(session_id)
    }
    
    /// Update real-time monitoring sessions
    pub fn update_sessions() -> Result<()> {
        if !REALTIME_MONITORING_ENABLED.load(Ordering::SeqCst) {
            return Ok(());
        }
        
        let now = crate::hal::timers::get_system_time_ms();
        let global_interval = REALTIME_SAMPLING_INTERVAL_MS.load(Ordering::SeqCst);
        
        // Check if it's time for a global sample
        let last_sample = LAST_REALTIME_SAMPLE.load(Ordering::SeqCst);
        if now - last_sample < global_interval {
            return Ok(());
        }
        
        LAST_REALTIME_SAMPLE.store(now, Ordering::SeqCst);
        
        // Collect current resource snapshot
        let snapshot = collect_resource_snapshot()?;
        
        // Update all active sessions
        let mut sessions = MONITORING_SESSIONS.write();
        let mut completed_sessions = Vec::new();
        
        for (i, session) in sessions.iter_mut().enumerate() {
            if !session.active {
                continue;
            }
            
            // Check if session duration exceeded
            if now - session.start_time > session.duration_ms {
                session.active = false;
                completed_sessions.push(i);
                continue;
            }
            
            // Check if it's time for this session's sample
            if (now - session.start_time) % session.sampling_interval_ms < global_interval {
                // Notify callbacks
                for callback in &session.callbacks {
                    for resource in &session.resources_monitored {
                        match resource.as_str() {
                            "cpu" => callback.on_resource_update("cpu", &snapshot),
                            "memory" => callback.on_resource_update("memory", &snapshot),
                            "disk" => callback.on_resource_update("disk", &snapshot),
                            "network" => callback.on_resource_update("network", &snapshot),
                            "performance" => callback.on_resource_update("performance", &snapshot),
                            "all" => callback.on_resource_update("all", &snapshot),
                            _ => callback.on_resource_update(resource, &snapshot),
                        }
                    }
                }
            }
        }
        
        // Remove completed sessions (in reverse order to maintain indices)
        for i in completed_sessions.iter().rev() {
            let session = sessions.remove(*i);
            info!("Real-time monitoring session completed: {}", session.session_id);
        }
        
        Ok(())
    }
    
    /// Collect current resource snapshot
    fn collect_resource_snapshot() -> Result<ResourceSnapshot> {
        let timestamp = crate::hal::timers::get_system_time_ms();
        
        let snapshot = ResourceSnapshot {
            timestamp,
            cpu_metrics: Some(super::cpu::get_performance_metrics()),
            memory_stats: Some(super::memory::get_stats()),
            disk_io_stats: Some(super::disk::get_io_stats()),
            network_io_stats: Some(super::network::get_io_stats()),
            performance_metrics: Some(super::performance::get_performance_metrics()),
            resource_pressure: Some(super::memory::get_pressure_info()),
        };
        
        Ok(snapshot)
    }
    
    /// Get active monitoring sessions
    pub fn get_active_sessions() -> Vec<u64> {
        MONITORING_SESSIONS.read()
            .iter()
            .filter(|s| s.active)
            .map(|s| s.session_id)
            .collect()
    }
    
    /// Stop a monitoring session
    pub fn stop_session(session_id: u64) -> Result<()> {
        let mut sessions = MONITORING_SESSIONS.write();
        
        for session in sessions.iter_mut() {
            if session.session_id == session_id {
                session.active = false;
                info!("Stopped real-time monitoring session: {}", session_id);
                break;
            }
        }
        
        Ok(())
    }
    
    /// Set global real-time sampling interval
    pub fn set_sampling_interval(interval_ms: u64) {
        REALTIME_SAMPLING_INTERVAL_MS.store(interval_ms, Ordering::SeqCst);
    }
}

/// Initialization functions for each subsystem
fn init_cpu_monitoring() -> Result<()> {
    cpu::init()
}

fn init_memory_monitoring() -> Result<()> {
    memory::init()
}

fn init_disk_monitoring() -> Result<()> {
    disk::init()
}

fn init_network_monitoring() -> Result<()> {
    network::init()
}

fn init_performance_tracking() -> Result<()> {
    performance::init()
}

fn init_alert_system() -> Result<()> {
    alerts::init()
}

fn init_realtime_collection() -> Result<()> {
    realtime::init()
}

/// Shutdown functions for each subsystem
fn shutdown_cpu_monitoring() -> Result<()> {
    cpu::shutdown()
}

fn shutdown_memory_monitoring() -> Result<()> {
    memory::shutdown()
}

fn shutdown_disk_monitoring() -> Result<()> {
    disk::shutdown()
}

fn shutdown_network_monitoring() -> Result<()> {
    network::shutdown()
}

fn shutdown_performance_tracking() -> Result<()> {
    performance::shutdown()
}

fn shutdown_alert_system() -> Result<()> {
    alerts::shutdown()
}

fn shutdown_realtime_collection() -> Result<()> {
    realtime::shutdown()
}

/// Main update function for all resource monitoring
pub fn update_all() -> Result<()> {
    // Update all subsystems
    cpu::update_stats()?;
    memory::update_stats()?;
    disk::update_stats()?;
    network::update_stats()?;
    performance::update_metrics()?;
    
    // Check alerts
    alerts::check_thresholds()?;
    
    // Update real-time sessions
    realtime::update_sessions()?;
    
    Ok(())
}

/// Get comprehensive system resource report
pub fn get_system_resource_report() -> Result<SystemResourceReport> {
    let timestamp = crate::hal::timers::get_system_time_ms();
    
    let report = SystemResourceReport {
        timestamp,
        cpu_metrics: cpu::get_performance_metrics(),
        memory_stats: memory::get_stats(),
        memory_pressure: memory::get_pressure_info(),
        disk_info: disk::get_disk_info(),
        disk_io_stats: disk::get_io_stats(),
        network_interfaces: network::get_interface_info(),
        network_io_stats: network::get_io_stats(),
        performance_metrics: performance::get_performance_metrics(),
        active_alerts: alerts::get_active_alerts(),
        alert_statistics: alerts::get_alert_statistics(),
    };
    
    Ok(report)
}

/// System resource report
#[derive(Debug, Clone)]
pub struct SystemResourceReport {
    pub timestamp: u64,
    pub cpu_metrics: cpu::CpuPerformanceMetrics,
    pub memory_stats: memory::MemoryStats,
    pub memory_pressure: memory::MemoryPressureInfo,
    pub disk_info: Vec<disk::DiskInfo>,
    pub disk_io_stats: Vec<disk::DiskIOStats>,
    pub network_interfaces: Vec<network::NetworkInterfaceInfo>,
    pub network_io_stats: Vec<network::NetworkIOStats>,
    pub performance_metrics: performance::SystemPerformanceMetrics,
    pub active_alerts: Vec<alerts::ResourceAlert>,
    pub alert_statistics: alerts::AlertStatistics,
}

/// Benchmark resource monitoring overhead
pub fn benchmark_monitoring_overhead() -> Result<(u64, u64, u64, u64)> {
    info!("Benchmarking resource monitoring overhead...");
    
    let start_total = crate::hal::timers::get_high_res_time();
    
    // Benchmark individual components
    let start_cpu = crate::hal::timers::get_high_res_time();
    let _ = cpu::update_stats();
    let cpu_time = crate::hal::timers::get_high_res_time() - start_cpu;
    
    let start_memory = crate::hal::timers::get_high_res_time();
    let _ = memory::update_stats();
    let memory_time = crate::hal::timers::get_high_res_time() - start_memory;
    
    let start_disk = crate::hal::timers::get_high_res_time();
    let _ = disk::update_stats();
    let disk_time = crate::hal::timers::get_high_res_time() - start_disk;
    
    let start_network = crate::hal::timers::get_high_res_time();
    let _ = network::update_stats();
    let network_time = crate::hal::timers::get_high_res_time() - start_network;
    
    let total_time = crate::hal::timers::get_high_res_time() - start_total;
    
    info!("Monitoring overhead benchmark: CPU: {}ns, Memory: {}ns, Disk: {}ns, Network: {}ns, Total: {}ns",
          cpu_time, memory_time, disk_time, network_time, total_time);
    
    Ok((cpu_time, memory_time, disk_time, network_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::resource_monitor::cpu::{get_performance_metrics, get_core_count};
    use crate::admin::resource_monitor::memory::{get_stats, get_pressure_level};
    use crate::admin::resource_monitor::disk::{get_disk_info, get_io_stats};
    use crate::admin::resource_monitor::network::{get_interface_info, get_io_stats};
    use crate::admin::resource_monitor::performance::get_performance_metrics;
    use crate::admin::resource_monitor::alerts::{get_active_alerts, get_alert_statistics};

    #[test]
    fn test_resource_monitor_initialization() -> Result<()> {
        // Test that all components can be initialized
        init()?;
        
        // Test that individual components can be initialized
        init_cpu_monitoring()?;
        init_memory_monitoring()?;
        init_disk_monitoring()?;
        init_network_monitoring()?;
        init_performance_tracking()?;
        init_alert_system()?;
        init_realtime_monitoring()?;
        
        // Test that all components can be shut down
        shutdown_realtime_monitoring()?;
        shutdown_alert_system()?;
        shutdown_performance_tracking()?;
        shutdown_network_monitoring()?;
        shutdown_disk_monitoring()?;
        shutdown_memory_monitoring()?;
        shutdown_cpu_monitoring()?;
        
        Ok(())
    }

    #[test]
    fn test_cpu_monitoring() -> Result<()> {
        init_cpu_monitoring()?;
        
        // Test basic CPU functionality
        let core_count = get_core_count();
        assert!(core_count > 0, "CPU should have at least one core");
        
        // Test CPU metrics collection
        let metrics = get_performance_metrics();
        assert!(metrics.cores_online > 0, "Should have online cores");
        assert!(metrics.total_cores > 0, "Should have total cores");
        assert!(metrics.total_utilization_percent >= 0.0, "CPU utilization should be non-negative");
        assert!(metrics.total_utilization_percent <= 100.0, "CPU utilization should not exceed 100%");
        
        // Test CPU statistics update
        let _ = update_stats();
        
        // Test per-core utilization
        let per_core_util = get_per_core_utilization();
        assert!(!per_core_util.is_empty(), "Should have per-core utilization data");
        
        shutdown_cpu_monitoring()?;
        Ok(())
    }

    #[test]
    fn test_system_resource_report() -> Result<()> {
        // Initialize all components
        init()?;
        
        // Generate system resource report
        let report = get_system_resource_report()?;
        
        // Verify report structure
        assert!(report.timestamp > 0, "Report should have valid timestamp");
        
        // Verify CPU metrics
        assert!(report.cpu_metrics.cores_online > 0, "Should have online cores");
        assert!(report.cpu_metrics.total_cores > 0, "Should have total cores");
        assert!(report.cpu_metrics.total_utilization_percent >= 0.0, "CPU utilization should be non-negative");
        assert!(report.cpu_metrics.total_utilization_percent <= 100.0, "CPU utilization should not exceed 100%");
        
        // Verify memory statistics
        assert!(report.memory_stats.total_bytes > 0, "Should have total memory");
        assert!(report.memory_stats.used_bytes <= report.memory_stats.total_bytes, "Used memory should not exceed total");
        assert!(report.memory_stats.usage_percent >= 0.0, "Memory usage should be non-negative");
        assert!(report.memory_stats.usage_percent <= 100.0, "Memory usage should not exceed 100%");
        
        // Verify disk information
        assert!(!report.disk_info.is_empty(), "Should have disk information");
        for disk in &report.disk_info {
            assert!(disk.total_bytes > 0, "Disk should have total space");
            assert!(disk.used_bytes <= disk.total_bytes, "Used space should not exceed total");
            assert!(disk.usage_percent >= 0.0, "Disk usage should be non-negative");
            assert!(disk.usage_percent <= 100.0, "Disk usage should not exceed 100%");
        }
        
        // Verify network information
        assert!(!report.network_interfaces.is_empty(), "Should have network interfaces");
        for interface in &report.network_interfaces {
            assert!(!interface.interface_name.is_empty(), "Interface should have a name");
            assert!(interface.mtu > 0, "MTU should be positive");
            assert!(interface.speed_mbps > 0, "Speed should be positive");
        }
        
        // Verify performance metrics
        assert!(report.performance_metrics.system_uptime_seconds >= 0, "Uptime should be non-negative");
        assert!(report.performance_metrics.overall_system_score >= 0.0, "Overall system score should be non-negative");
        assert!(report.performance_metrics.overall_system_score <= 100.0, "Overall system score should not exceed 100%");
        
        // Verify alert statistics
        assert!(report.alert_statistics.total_alerts >= 0, "Total alerts should be non-negative");
        assert!(report.alert_statistics.active_alerts >= 0, "Active alerts should be non-negative");
        assert!(report.alert_statistics.resolved_alerts >= 0, "Resolved alerts should be non-negative");
        
        // Shutdown all components
        shutdown()?;
        
        Ok(())
    }
}