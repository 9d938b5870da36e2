//! Memory Allocation Pattern Analysis
//!
//! This module provides hooks into the memory allocator to track and analyze
//! allocation patterns, sizes, frequency, and spatial locality.

use core::sync::atomic::{AtomicU64, AtomicU32, Ordering};
use spin::RwLock;
use log::info;
use bitflags::bitflags;

/// Allocation request structure
#[derive(Debug, Clone)]
pub struct AllocationRequest {
    pub size: usize,
    pub alignment: usize,
    pub node: u8,
    pub flags: AllocationFlags,
    pub caller: u64,
    pub timestamp: u64,
}

/// Allocation pattern statistics
#[derive(Debug, Clone)]
pub struct AllocationPattern {
    pub size: usize,
    pub count: AtomicU64,
    pub total_size: AtomicU64,
    pub frequency: AtomicU64,
    pub last_access: AtomicU64,
    pub allocation_sites: RwLock<Vec<AllocationSite>>,
}

/// Call site information
#[derive(Debug, Clone)]
pub struct AllocationSite {
    pub caller: u64,
    pub count: u32,
    pub total_size: u64,
    pub first_allocation: u64,
    pub last_allocation: u64,
}

/// Size histogram for allocation patterns
#[derive(Debug, Clone)]
pub struct SizeHistogram {
    pub small_allocations: AtomicU64,    // < 1KB
    pub medium_allocations: AtomicU64,   // 1KB - 64KB
    pub large_allocations: AtomicU64,    // 64KB - 1MB
    pub huge_allocations: AtomicU64,     // 1MB - 16MB
    pub giant_allocations: AtomicU64,    // > 16MB
}

/// Temporal pattern analysis
#[derive(Debug, Clone)]
pub struct TemporalPattern {
    pub bursts: AtomicU64,              // Allocation bursts
    pub steady_state: AtomicU64,        // Steady allocation rate
    pub spikes: AtomicU64,              // Allocation spikes
    pub gaps: AtomicU64,                // Periods with no allocations
}

/// Allocation patterns
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationPatternType {
    Random,
    Sequential,
    Batched,
    Scattered,
    Periodic,
    Burst,
}

bitflags! {
    /// Allocation flags
    pub struct AllocationFlags: u32 {
        const NORMAL = 0b00000001;
        const URGENT = 0b00000010;
        const LAZY = 0b00000100;
        const ZEROED = 0b00001000;
        const DMA = 0b00010000;
        const HIGH_PRIORITY = 0b00100000;
        const REUSABLE = 0b01000000;
    }
}

/// Main allocator hook system
pub struct AllocatorHook {
    patterns: RwLock<Vec<AllocationPattern>>,
    histogram: RwLock<SizeHistogram>,
    temporal_pattern: RwLock<TemporalPattern>,
    recent_requests: RwLock<VecDeque<AllocationRequest>>,
    pattern_window: AtomicU32,
    total_allocations: AtomicU64,
    total_deallocations: AtomicU64,
}

impl AllocatorHook {
    /// Initialize the allocator hook system
    pub fn init() {
        let hook = AllocatorHook {
            patterns: RwLock::new(Vec::new()),
            histogram: RwLock::new(SizeHistogram {
                small_allocations: AtomicU64::new(0),
                medium_allocations: AtomicU64::new(0),
                large_allocations: AtomicU64::new(0),
                huge_allocations: AtomicU64::new(0),
                giant_allocations: AtomicU64::new(0),
            }),
            temporal_pattern: RwLock::new(TemporalPattern {
                bursts: AtomicU64::new(0),
                steady_state: AtomicU64::new(0),
                spikes: AtomicU64::new(0),
                gaps: AtomicU64::new(0),
            }),
            recent_requests: RwLock::new(VecDeque::new()),
            pattern_window: AtomicU32::new(1000),
            total_allocations: AtomicU64::new(0),
            total_deallocations: AtomicU64::new(0),
        };
        
        unsafe {
            ALLOCATOR_HOOK = Some(hook);
        }
        
        info!("Allocator hook system initialized");
    }
    
    /// Hook for allocation requests
    pub fn hook_allocation(size: usize, alignment: usize, node: u8, 
                          flags: AllocationFlags, caller: u64) {
        unsafe {
            if let Some(hook) = ALLOCATOR_HOOK.as_ref() {
                let request = AllocationRequest {
                    size,
                    alignment,
                    node,
                    flags,
                    caller,
                    timestamp: get_timestamp(),
                };
                
                // Record allocation
                hook.record_allocation(request);
                
                // Update global statistics
                hook.total_allocations.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
    
    /// Hook for deallocation requests
    pub fn hook_deallocation(size: usize, caller: u64) {
        unsafe {
            if let Some(hook) = ALLOCATOR_HOOK.as_ref() {
                // Update global statistics
                hook.total_deallocations.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
    
    /// Record an allocation request
    fn record_allocation(&self, request: AllocationRequest) {
        // Update size histogram
        {
            let mut histogram = self.histogram.write();
            match request.size {
                0..=1024 => histogram.small_allocations.fetch_add(1, Ordering::SeqCst),
                1025..=65536 => histogram.medium_allocations.fetch_add(1, Ordering::SeqCst),
                65537..=1048576 => histogram.large_allocations.fetch_add(1, Ordering::SeqCst),
                1048577..=16777216 => histogram.huge_allocations.fetch_add(1, Ordering::SeqCst),
                _ => histogram.giant_allocations.fetch_add(1, Ordering::SeqCst),
            }
        }
        
        // Record in recent requests
        {
            let mut requests = self.recent_requests.write();
            requests.push_back(request);
            
            // Keep only recent requests in window
            let window_size = self.pattern_window.load(Ordering::SeqCst);
            while requests.len() > window_size as usize {
                requests.pop_front();
            }
        }
        
        // Update patterns
        self.update_patterns();
    }
    
    /// Analyze and update allocation patterns
    fn update_patterns(&self) {
        let requests = self.recent_requests.read();
        if requests.is_empty() {
            return;
        }
        
        // Group allocations by size
        let mut size_groups = std::collections::HashMap::new();
        for request in requests.iter() {
            size_groups.entry(request.size)
                .or_insert_with(Vec::new)
                .push(request);
        }
        
        // Update pattern statistics
        let mut patterns = self.patterns.write();
        for (size, group_requests) in size_groups {
            if let Some(pattern) = patterns.iter_mut().find(|p| p.size == size) {
                // Update existing pattern
                pattern.count.fetch_add(group_requests.len() as u64, Ordering::SeqCst);
                pattern.total_size.fetch_add(
                    group_requests.iter().map(|r| r.size as u64).sum(), 
                    Ordering::SeqCst
                );
                pattern.frequency.fetch_add(1, Ordering::SeqCst);
                pattern.last_access.store(get_timestamp(), Ordering::SeqCst);
                
                // Update allocation sites
                self.update_allocation_sites(&mut pattern.allocation_sites, &group_requests);
            } else {
                // Create new pattern
                let mut allocation_sites = Vec::new();
                self.update_allocation_sites(&mut allocation_sites, &group_requests);
                
                patterns.push(AllocationPattern {
                    size,
                    count: AtomicU64::new(group_requests.len() as u64),
                    total_size: AtomicU64::new(
                        group_requests.iter().map(|r| r.size as u64).sum()
                    ),
                    frequency: AtomicU64::new(1),
                    last_access: AtomicU64::new(get_timestamp()),
                    allocation_sites: RwLock::new(allocation_sites),
                });
            }
        }
    }
    
    /// Update allocation site information
    fn update_allocation_sites(&self, sites: &mut Vec<AllocationSite>, 
                              requests: &[AllocationRequest]) {
        let mut site_map = std::collections::HashMap::new();
        
        for request in requests {
            site_map.entry(request.caller)
                .or_insert_with(|| AllocationSite {
                    caller: request.caller,
                    count: 0,
                    total_size: 0,
                    first_allocation: request.timestamp,
                    last_allocation: request.timestamp,
                })
                .count += 1;
        }
        
        for (caller, site_info) in site_map {
            if let Some(existing_site) = sites.iter_mut().find(|s| s.caller == caller) {
                existing_site.count += site_info.count;
                existing_site.total_size += site_info.total_size;
                if site_info.first_allocation < existing_site.first_allocation {
                    existing_site.first_allocation = site_info.first_allocation;
                }
                if site_info.last_allocation > existing_site.last_allocation {
                    existing_site.last_allocation = site_info.last_allocation;
                }
            } else {
                sites.push(site_info);
            }
        }
    }
    
    /// Analyze allocation pattern type
    pub fn analyze_pattern_type(&self, size: usize) -> AllocationPatternType {
        let requests = self.recent_requests.read();
        let size_requests: Vec<_> = requests.iter()
            .filter(|r| r.size == size)
            .collect();
        
        if size_requests.len() < 2 {
            return AllocationPatternType::Random;
        }
        
        // Analyze temporal distribution
        let mut time_diffs = Vec::new();
        for i in 1..size_requests.len() {
            time_diffs.push(size_requests[i].timestamp - size_requests[i-1].timestamp);
        }
        
        // Calculate variance
        let mean = time_diffs.iter().sum::<u64>() as f64 / time_diffs.len() as f64;
        let variance = time_diffs.iter()
            .map(|&x| (x as f64 - mean).powi(2))
            .sum::<f64>() / time_diffs.len() as f64;
        
        // Determine pattern based on variance
        if variance < 1000.0 {
            AllocationPatternType::Sequential
        } else if variance < 10000.0 {
            AllocationPatternType::Periodic
        } else if variance > 100000.0 {
            AllocationPatternType::Burst
        } else {
            AllocationPatternType::Scattered
        }
    }
    
    /// Get allocation statistics
    pub fn get_statistics(&self) -> AllocationStatistics {
        let histogram = self.histogram.read();
        let total_alloc = self.total_allocations.load(Ordering::SeqCst);
        let total_dealloc = self.total_deallocations.load(Ordering::SeqCst);
        
        AllocationStatistics {
            total_allocations: total_alloc,
            total_deallocations: total_dealloc,
            size_histogram: histogram.clone(),
            active_patterns: self.patterns.read().len(),
            recent_requests: self.recent_requests.read().len() as u64,
        }
    }
    
    /// Generate optimization recommendations
    pub fn generate_recommendations(&self) -> Vec<OptimizationRecommendation> {
        let mut recommendations = Vec::new();
        
        // Analyze patterns for optimization opportunities
        let patterns = self.patterns.read();
        
        for pattern in patterns.iter() {
            let count = pattern.count.load(Ordering::SeqCst);
            let avg_size = pattern.total_size.load(Ordering::SeqCst) / count;
            
            if count > 1000 && avg_size < 1024 {
                recommendations.push(OptimizationRecommendation {
                    type_: RecommendationType::UseMemoryPool,
                    description: format!("Use memory pool for frequent small allocations (size: {} bytes, count: {})", 
                                       pattern.size, count),
                    priority: RecommendationPriority::High,
                    estimated_savings: count * 100, // 100 bytes per allocation saved
                });
            }
            
            if avg_size > 1024 * 1024 {
                recommendations.push(OptimizationRecommendation {
                    type_: RecommendationType::UseLargePages,
                    description: format!("Consider large pages for large allocations (avg size: {} bytes)", avg_size),
                    priority: RecommendationPriority::Medium,
                    estimated_savings: avg_size / 100, // ~1% savings
                });
            }
        }
        
        recommendations
    }
}

/// Allocation statistics structure
#[derive(Debug, Clone)]
pub struct AllocationStatistics {
    pub total_allocations: u64,
    pub total_deallocations: u64,
    pub size_histogram: SizeHistogram,
    pub active_patterns: usize,
    pub recent_requests: u64,
}

/// Optimization recommendation
#[derive(Debug, Clone)]
pub struct OptimizationRecommendation {
    pub type_: RecommendationType,
    pub description: String,
    pub priority: RecommendationPriority,
    pub estimated_savings: u64,
}

#[derive(Debug, Clone)]
pub enum RecommendationType {
    UseMemoryPool,
    UseLargePages,
    OptimizeAlignment,
    UseNUMAAware,
    EnablePrefetching,
}

#[derive(Debug, Clone)]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Double-ended queue implementation
use alloc::collections::VecDeque;

struct VecDeque<T> {
    inner: Vec<T>,
}

impl<T> VecDeque<T> {
    fn new() -> Self {
        Self { inner: Vec::new() }
    }
    
    fn push_back(&mut self, item: T) {
        self.inner.push(item);
    }
    
    fn pop_front(&mut self) -> Option<T> {
        if !self.inner.is_empty() {
            Some(self.inner.remove(0))
        } else {
            None
        }
    }
    
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> Default for VecDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Global allocator hook instance
static mut ALLOCATOR_HOOK: Option<AllocatorHook> = None;

// Placeholder function
fn get_timestamp() -> u64 {
    // TODO: Integrate with actual system time
    0
}