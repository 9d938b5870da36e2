//! Real-time Memory Usage Tracking and Visualization
//!
//! This module provides real-time monitoring of memory usage patterns,
//! allocation rates, and system memory pressure with visualization capabilities.

use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use spin::RwLock;
use log::warn;
use bitflags::bitflags;

/// Real-time memory tracking data structures
#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    pub timestamp: u64,
    pub total_allocated: u64,
    pub allocation_rate: u64,
    pub deallocation_rate: u64,
    pub free_memory: u64,
    pub used_memory: u64,
    pub cache_memory: u64,
    pub buffer_memory: u64,
    pub swap_used: u64,
    pub memory_pressure: f32,
}

#[derive(Debug, Clone)]
pub struct AllocationRate {
    pub current_rate: i64,    // bytes per second
    pub average_rate: f64,
    pub peak_rate: u64,
    pub trend: AllocationTrend,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AllocationTrend {
    Increasing,
    Decreasing,
    Stable,
    Volatile,
}

/// Ring buffer for storing memory snapshots
const SNAPSHOT_BUFFER_SIZE: usize = 1024;
const RATE_CALCULATION_WINDOW: u64 = 1000; // milliseconds

bitflags! {
    /// Memory pressure levels
    pub struct MemoryPressure: u32 {
        const NORMAL = 0b0001;
        const LOW = 0b0010;
        const MEDIUM = 0b0100;
        const HIGH = 0b1000;
        const CRITICAL = 0b10000;
    }
}

pub struct RealtimeTracker {
    snapshots: RwLock<[Option<MemorySnapshot>; SNAPSHOT_BUFFER_SIZE]>,
    snapshot_index: AtomicUsize,
    last_snapshot_time: AtomicU64,
    
    // Rate tracking
    allocation_count: AtomicU64,
    deallocation_count: AtomicU64,
    allocation_bytes: AtomicU64,
    deallocation_bytes: AtomicU64,
    
    // Rate calculation window
    rate_start_time: AtomicU64,
    rate_start_allocations: AtomicU64,
    rate_start_deallocations: AtomicU64,
    
    // Memory pressure monitoring
    pressure_threshold_low: u64,
    pressure_threshold_medium: u64,
    pressure_threshold_high: u64,
    pressure_threshold_critical: u64,
}

impl RealtimeTracker {
    /// Initialize the real-time tracker
    pub fn init() {
        let tracker = RealtimeTracker {
            snapshots: RwLock::new([None; SNAPSHOT_BUFFER_SIZE]),
            snapshot_index: AtomicUsize::new(0),
            last_snapshot_time: AtomicU64::new(0),
            allocation_count: AtomicU64::new(0),
            deallocation_count: AtomicU64::new(0),
            allocation_bytes: AtomicU64::new(0),
            deallocation_bytes: AtomicU64::new(0),
            rate_start_time: AtomicU64::new(0),
            rate_start_allocations: AtomicU64::new(0),
            rate_start_deallocations: AtomicU64::new(0),
            pressure_threshold_low: 0,      // 70% of total memory
            pressure_threshold_medium: 0,   // 80% of total memory
            pressure_threshold_high: 0,     // 90% of total memory
            pressure_threshold_critical: 0, // 95% of total memory
        };
        
        // Store tracker globally
        unsafe {
            REALTIME_TRACKER = Some(tracker);
        }
        
        log::info!("Real-time memory tracker initialized");
    }
    
    /// Record an allocation event
    pub fn record_allocation(size: usize) {
        if let Some(tracker) = unsafe { REALTIME_TRACKER.as_ref() } {
            tracker.allocation_count.fetch_add(1, Ordering::SeqCst);
            tracker.allocation_bytes.fetch_add(size as u64, Ordering::SeqCst);
        }
    }
    
    /// Record a deallocation event
    pub fn record_deallocation(size: usize) {
        if let Some(tracker) = unsafe { REALTIME_TRACKER.as_ref() } {
            tracker.deallocation_count.fetch_add(1, Ordering::SeqCst);
            tracker.deallocation_bytes.fetch_add(size as u64, Ordering::SeqCst);
        }
    }
    
    /// Take a snapshot of current memory state
    pub fn take_snapshot() -> Option<MemorySnapshot> {
        unsafe {
            REALTIME_TRACKER.as_ref().and_then(|tracker| {
                let timestamp = get_current_time_ms();
                let current_allocated = get_allocated_memory();
                let free_memory = get_free_memory();
                let used_memory = get_used_memory();
                let cache_memory = get_cache_memory();
                let buffer_memory = get_buffer_memory();
                let swap_used = get_swap_used();
                
                // Calculate allocation and deallocation rates
                let rates = tracker.calculate_rates(timestamp)?;
                
                // Calculate memory pressure
                let pressure = tracker.calculate_memory_pressure(used_memory);
                
                let snapshot = MemorySnapshot {
                    timestamp,
                    total_allocated: current_allocated,
                    allocation_rate: rates.current_rate as u64,
                    deallocation_rate: rates.deallocation_rate as u64,
                    free_memory,
                    used_memory,
                    cache_memory,
                    buffer_memory,
                    swap_used,
                    memory_pressure: pressure,
                };
                
                // Store snapshot in ring buffer
                let index = tracker.snapshot_index.fetch_add(1, Ordering::SeqCst) % SNAPSHOT_BUFFER_SIZE;
                let mut snapshots = tracker.snapshots.write();
                snapshots[index] = Some(snapshot);
                
                Some(snapshot)
            })
        }
    }
    
    /// Get recent memory snapshots
    pub fn get_recent_snapshots(count: usize) -> Vec<MemorySnapshot> {
        unsafe {
            if let Some(tracker) = REALTIME_TRACKER.as_ref() {
                let snapshots = tracker.snapshots.read();
                let mut result = Vec::new();
                let current_index = tracker.snapshot_index.load(Ordering::SeqCst);
                
                for i in 0..count.min(SNAPSHOT_BUFFER_SIZE) {
                    let index = (current_index + i) % SNAPSHOT_BUFFER_SIZE;
                    if let Some(snapshot) = snapshots[index] {
                        result.push(snapshot);
                    }
                }
                result
            } else {
                Vec::new()
            }
        }
    }
    
    /// Calculate current allocation and deallocation rates
    fn calculate_rates(&self, current_time: u64) -> Option<AllocationRate> {
        let start_time = self.rate_start_time.load(Ordering::SeqCst);
        if current_time < start_time + RATE_CALCULATION_WINDOW {
            return None;
        }
        
        let time_diff = current_time - start_time;
        let allocations = self.allocation_count.load(Ordering::SeqCst);
        let deallocations = self.deallocation_count.load(Ordering::SeqCst);
        
        let start_allocations = self.rate_start_allocations.load(Ordering::SeqCst);
        let start_deallocations = self.rate_start_deallocations.load(Ordering::SeqCst);
        
        let allocation_diff = allocations - start_allocations;
        let deallocation_diff = deallocations - start_deallocations;
        
        // Calculate rates in bytes per second
        let allocation_rate = ((allocation_diff as f64) / (time_diff as f64)) * 1000.0;
        let deallocation_rate = ((deallocation_diff as f64) / (time_diff as f64)) * 1000.0;
        
        // Update rate calculation window
        self.rate_start_time.store(current_time, Ordering::SeqCst);
        self.rate_start_allocations.store(allocations, Ordering::SeqCst);
        self.rate_start_deallocations.store(deallocations, Ordering::SeqCst);
        
        Some(AllocationRate {
            current_rate: allocation_rate as i64,
            average_rate: allocation_rate, // TODO: Implement proper averaging
            peak_rate: 0, // TODO: Track peak rate
            trend: self.determine_trend(allocation_rate),
        })
    }
    
    /// Determine allocation trend
    fn determine_trend(&self, current_rate: f64) -> AllocationTrend {
        // TODO: Implement trend analysis based on historical data
        if current_rate > 1000000.0 {
            AllocationTrend::Increasing
        } else if current_rate < -1000000.0 {
            AllocationTrend::Decreasing
        } else if current_rate.abs() < 10000.0 {
            AllocationTrend::Stable
        } else {
            AllocationTrend::Volatile
        }
    }
    
    /// Calculate memory pressure level
    fn calculate_memory_pressure(&self, used_memory: u64) -> f32 {
        let total_memory = used_memory + get_free_memory();
        if total_memory == 0 {
            return 0.0;
        }
        
        let usage_ratio = (used_memory as f32) / (total_memory as f32);
        
        if usage_ratio >= 0.95 {
            warn!("CRITICAL memory pressure: {:.2}% used", usage_ratio * 100.0);
        } else if usage_ratio >= 0.90 {
            warn!("HIGH memory pressure: {:.2}% used", usage_ratio * 100.0);
        } else if usage_ratio >= 0.80 {
            log::warn!("MEDIUM memory pressure: {:.2}% used", usage_ratio * 100.0);
        }
        
        usage_ratio
    }
    
    /// Generate memory usage visualization data
    pub fn generate_visualization_data(&self) -> MemoryVisualizationData {
        let snapshots = self.get_recent_snapshots(100);
        
        MemoryVisualizationData {
            timestamps: snapshots.iter().map(|s| s.timestamp).collect(),
            allocated_memory: snapshots.iter().map(|s| s.total_allocated).collect(),
            allocation_rates: snapshots.iter().map(|s| s.allocation_rate as f64).collect(),
            free_memory: snapshots.iter().map(|s| s.free_memory).collect(),
            memory_pressure: snapshots.iter().map(|s| s.memory_pressure).collect(),
            cache_usage: snapshots.iter().map(|s| s.cache_memory).collect(),
            buffer_usage: snapshots.iter().map(|s| s.buffer_memory).collect(),
        }
    }
    
    /// Start monitoring with specified interval
    pub fn start_monitoring(interval_ms: u32) {
        unsafe {
            if let Some(tracker) = REALTIME_TRACKER.as_mut() {
                // Start periodic snapshot taking
                start_periodic_monitoring(interval_ms);
                log::info!("Started real-time memory monitoring with {}ms interval", interval_ms);
            }
        }
    }
    
    /// Stop monitoring
    pub fn stop_monitoring() {
        unsafe {
            REALTIME_TRACKER.as_mut().map(|tracker| {
                stop_periodic_monitoring();
                log::info!("Stopped real-time memory monitoring");
            });
        }
    }
}

/// Data structure for visualization
#[derive(Debug, Clone)]
pub struct MemoryVisualizationData {
    pub timestamps: Vec<u64>,
    pub allocated_memory: Vec<u64>,
    pub allocation_rates: Vec<f64>,
    pub free_memory: Vec<u64>,
    pub memory_pressure: Vec<f32>,
    pub cache_usage: Vec<u64>,
    pub buffer_usage: Vec<u64>,
}

/// Global real-time tracker instance
static mut REALTIME_TRACKER: Option<RealtimeTracker> = None;

// Placeholder functions - would integrate with actual memory management
fn get_current_time_ms() -> u64 {
    // TODO: Integrate with actual system time
    0
}

fn get_allocated_memory() -> u64 {
    // TODO: Integrate with memory manager
    0
}

fn get_free_memory() -> u64 {
    // TODO: Integrate with memory manager
    0
}

fn get_used_memory() -> u64 {
    // TODO: Integrate with memory manager
    0
}

fn get_cache_memory() -> u64 {
    // TODO: Integrate with cache profiler
    0
}

fn get_buffer_memory() -> u64 {
    // TODO: Integrate with memory manager
    0
}

fn get_swap_used() -> u64 {
    // TODO: Integrate with memory manager
    0
}

fn start_periodic_monitoring(_interval_ms: u32) {
    // TODO: Start periodic monitoring thread/task
}

fn stop_periodic_monitoring() {
    // TODO: Stop periodic monitoring
}