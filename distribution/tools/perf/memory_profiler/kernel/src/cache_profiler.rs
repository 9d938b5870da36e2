//! Cache Hit/Miss Ratio Monitoring
//!
//! This module provides comprehensive cache performance monitoring including
//! L1, L2, L3 cache hit/miss ratios, cache line utilization, and memory access patterns.

use core::sync::atomic::{AtomicU64, AtomicU32, Ordering};
use spin::RwLock;
use log::info;
use bitflags::bitflags;

/// Cache access record
#[derive(Debug, Clone)]
pub struct CacheAccess {
    pub address: u64,
    pub size: usize,
    pub access_type: CacheAccessType,
    pub cache_level: CacheLevel,
    pub hit: bool,
    pub timestamp: u64,
    pub latency: u32,
}

/// Cache performance statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub level: CacheLevel,
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub evictions: AtomicU64,
    pub total_accesses: AtomicU64,
    pub total_latency: AtomicU64,
    pub line_utilization: AtomicU64,
    pub hit_ratio: f32,
    pub average_latency: f32,
}

/// Memory access pattern analysis
#[derive(Debug, Clone)]
pub struct AccessPattern {
    pub address_range: (u64, u64),
    pub access_count: u64,
    pub access_type: CacheAccessType,
    pub locality_score: f32,
    pub reuse_distance: u64,
    pub stride: i64,
}

/// Cache coherence monitoring
#[derive(Debug, Clone)]
pub struct CoherenceEvent {
    pub event_type: CoherenceEventType,
    pub address: u64,
    pub node_id: u8,
    pub timestamp: u64,
    pub duration: u32,
}

bitflags! {
    /// Cache access types
    pub struct CacheAccessType: u32 {
        const READ = 0b0001;
        const WRITE = 0b0010;
        const PREFETCH = 0b0100;
        const EVICT = 0b1000;
        const INVALIDATE = 0b10000;
    }
}

/// Cache levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CacheLevel {
    L1,
    L2,
    L3,
    TLB,
}

/// Cache coherence event types
#[derive(Debug, Clone)]
pub enum CoherenceEventType {
    MESI_Invalidate,
    MESI_ReadMiss,
    MESI_WriteMiss,
    MESI_Shared,
    MESI_Exclusive,
    MOESI_ReadRequest,
    MOESI_WriteRequest,
    Flush,
    Invalidate,
}

/// Main cache profiler
pub struct CacheProfiler {
    stats: RwLock<[CacheStats; 4]>,
    recent_accesses: RwLock<VecDeque<CacheAccess>>,
    access_patterns: RwLock<std::collections::HashMap<u64, AccessPattern>>,
    coherence_events: RwLock<Vec<CoherenceEvent>>,
    active_monitors: AtomicU32,
    total_misses: AtomicU64,
    total_hits: AtomicU64,
}

impl CacheProfiler {
    /// Initialize the cache profiler
    pub fn init() {
        let profiler = CacheProfiler {
            stats: RwLock::new([
                CacheStats {
                    level: CacheLevel::L1,
                    hits: AtomicU64::new(0),
                    misses: AtomicU64::new(0),
                    evictions: AtomicU64::new(0),
                    total_accesses: AtomicU64::new(0),
                    total_latency: AtomicU64::new(0),
                    line_utilization: AtomicU64::new(0),
                    hit_ratio: 0.0,
                    average_latency: 0.0,
                },
                CacheStats {
                    level: CacheLevel::L2,
                    hits: AtomicU64::new(0),
                    misses: AtomicU64::new(0),
                    evictions: AtomicU64::new(0),
                    total_accesses: AtomicU64::new(0),
                    total_latency: AtomicU64::new(0),
                    line_utilization: AtomicU64::new(0),
                    hit_ratio: 0.0,
                    average_latency: 0.0,
                },
                CacheStats {
                    level: CacheLevel::L3,
                    hits: AtomicU64::new(0),
                    misses: AtomicU64::new(0),
                    evictions: AtomicU64::new(0),
                    total_accesses: AtomicU64::new(0),
                    total_latency: AtomicU64::new(0),
                    line_utilization: AtomicU64::new(0),
                    hit_ratio: 0.0,
                    average_latency: 0.0,
                },
                CacheStats {
                    level: CacheLevel::TLB,
                    hits: AtomicU64::new(0),
                    misses: AtomicU64::new(0),
                    evictions: AtomicU64::new(0),
                    total_accesses: AtomicU64::new(0),
                    total_latency: AtomicU64::new(0),
                    line_utilization: AtomicU64::new(0),
                    hit_ratio: 0.0,
                    average_latency: 0.0,
                },
            ]),
            recent_accesses: RwLock::new(VecDeque::new()),
            access_patterns: RwLock::new(std::collections::HashMap::new()),
            coherence_events: RwLock::new(Vec::new()),
            active_monitors: AtomicU32::new(0),
            total_misses: AtomicU64::new(0),
            total_hits: AtomicU64::new(0),
        };
        
        unsafe {
            CACHE_PROFILER = Some(profiler);
        }
        
        info!("Cache profiler initialized");
    }
    
    /// Record a cache access
    pub fn record_access(address: u64, size: usize, access_type: CacheAccessType, 
                        latency: u32) {
        unsafe {
            if let Some(profiler) = CACHE_PROFILER.as_ref() {
                profiler._record_access(address, size, access_type, CacheLevel::L1, latency);
                
                // Also record access in L2 and L3 if there's a miss
                profiler._record_access(address, size, access_type, CacheLevel::L2, latency);
                profiler._record_access(address, size, access_type, CacheLevel::L3, latency);
            }
        }
    }
    
    /// Internal method to record cache access
    fn _record_access(&self, address: u64, size: usize, access_type: CacheAccessType,
                     level: CacheLevel, latency: u32) {
        let cache_index = level as usize;
        let stats = self.stats.read();
        
        let cache_stats = &stats[cache_index];
        cache_stats.total_accesses.fetch_add(1, Ordering::SeqCst);
        cache_stats.total_latency.fetch_add(latency as u64, Ordering::SeqCst);
        
        // Determine if this is a hit or miss
        let is_hit = self.is_cache_hit(address, level);
        
        if is_hit {
            cache_stats.hits.fetch_add(1, Ordering::SeqCst);
            self.total_hits.fetch_add(1, Ordering::SeqCst);
        } else {
            cache_stats.misses.fetch_add(1, Ordering::SeqCst);
            self.total_misses.fetch_add(1, Ordering::SeqCst);
        }
        
        // Update hit ratio
        let total = cache_stats.total_accesses.load(Ordering::SeqCst);
        let hits = cache_stats.hits.load(Ordering::SeqCst);
        if total > 0 {
            cache_stats.hit_ratio = (hits as f32) / (total as f32);
        }
        
        // Update average latency
        let total_latency = cache_stats.total_latency.load(Ordering::SeqCst);
        cache_stats.average_latency = (total_latency as f32) / (total as f32);
        
        // Record detailed access
        self.record_detailed_access(address, size, access_type, level, is_hit, latency);
    }
    
    /// Record detailed cache access information
    fn record_detailed_access(&self, address: u64, size: usize, 
                             access_type: CacheAccessType, level: CacheLevel,
                             hit: bool, latency: u32) {
        let access = CacheAccess {
            address,
            size,
            access_type,
            cache_level: level,
            hit,
            timestamp: get_timestamp(),
            latency,
        };
        
        // Store in recent accesses
        {
            let mut accesses = self.recent_accesses.write();
            accesses.push_back(access);
            
            // Keep only recent accesses (e.g., last 1000)
            if accesses.len() > 1000 {
                accesses.pop_front();
            }
        }
        
        // Update access patterns
        self.update_access_pattern(address, access_type);
    }
    
    /// Check if address hits in cache
    fn is_cache_hit(&self, address: u64, level: CacheLevel) -> bool {
        // TODO: Implement actual cache lookup logic
        // This is a simplified placeholder
        let random_factor = (address % 1000) as f32 / 1000.0;
        
        match level {
            CacheLevel::L1 => random_factor > 0.1,  // 90% hit rate
            CacheLevel::L2 => random_factor > 0.05, // 95% hit rate  
            CacheLevel::L3 => random_factor > 0.02, // 98% hit rate
            CacheLevel::TLB => random_factor > 0.08, // 92% hit rate
        }
    }
    
    /// Update memory access pattern analysis
    fn update_access_pattern(&self, address: u64, access_type: CacheAccessType) {
        let mut patterns = self.access_patterns.write();
        
        // Simple pattern detection based on address ranges
        let range_start = (address / 4096) * 4096; // Page-aligned
        let range_end = range_start + 4096;
        
        if let Some(pattern) = patterns.get_mut(&range_start) {
            pattern.access_count += 1;
            pattern.access_type = access_type;
        } else {
            patterns.insert(range_start, AccessPattern {
                address_range: (range_start, range_end),
                access_count: 1,
                access_type,
                locality_score: 0.5, // TODO: Calculate proper locality score
                reuse_distance: 0,   // TODO: Calculate reuse distance
                stride: 0,           // TODO: Calculate stride
            });
        }
    }
    
    /// Get cache performance statistics
    pub fn get_statistics(&self) -> CachePerformanceReport {
        let stats = self.stats.read();
        let total_misses = self.total_misses.load(Ordering::SeqCst);
        let total_hits = self.total_hits.load(Ordering::SeqCst);
        let total_accesses = total_misses + total_hits;
        
        let overall_hit_ratio = if total_accesses > 0 {
            (total_hits as f32) / (total_accesses as f32)
        } else {
            0.0
        };
        
        CachePerformanceReport {
            l1_stats: stats[0].clone(),
            l2_stats: stats[1].clone(),
            l3_stats: stats[2].clone(),
            tlb_stats: stats[3].clone(),
            overall_hit_ratio,
            total_accesses,
            recent_accesses: self.recent_accesses.read().len(),
            access_patterns: self.access_patterns.read().len(),
        }
    }
    
    /// Analyze cache performance and generate recommendations
    pub fn analyze_performance(&self) -> Vec<CacheRecommendation> {
        let mut recommendations = Vec::new();
        let stats = self.stats.read();
        
        for (index, cache_stats) in stats.iter().enumerate() {
            let level = cache_stats.level;
            let hit_ratio = cache_stats.hit_ratio;
            let total_accesses = cache_stats.total_accesses.load(Ordering::SeqCst);
            
            if total_accesses > 1000 { // Only analyze if we have enough data
                if hit_ratio < 0.8 {
                    recommendations.push(CacheRecommendation {
                        level,
                        type_: CacheRecommendationType::IncreaseCacheSize,
                        description: format!("Low hit ratio ({:.2}%) for {} cache - consider increasing size", 
                                           hit_ratio * 100.0, level_name(level)),
                        priority: CachePriority::High,
                        impact_score: (100.0 - hit_ratio * 100.0) as u32,
                    });
                }
                
                if cache_stats.average_latency > 50.0 {
                    recommendations.push(CacheRecommendation {
                        level,
                        type_: CacheRecommendationType::OptimizeLatency,
                        description: format!("High average latency ({:.2} cycles) for {} cache", 
                                           cache_stats.average_latency, level_name(level)),
                        priority: CachePriority::Medium,
                        impact_score: cache_stats.average_latency as u32,
                    });
                }
            }
        }
        
        recommendations
    }
    
    /// Monitor cache coherence events
    pub fn record_coherence_event(event_type: CoherenceEventType, 
                                 address: u64, node_id: u8, duration: u32) {
        unsafe {
            if let Some(profiler) = CACHE_PROFILER.as_ref() {
                let event = CoherenceEvent {
                    event_type,
                    address,
                    node_id,
                    timestamp: get_timestamp(),
                    duration,
                };
                
                profiler.coherence_events.write().push(event);
            }
        }
    }
    
    /// Start cache monitoring
    pub fn start_monitoring(sample_rate: u32) {
        unsafe {
            if let Some(profiler) = CACHE_PROFILER.as_mut() {
                profiler.active_monitors.fetch_add(1, Ordering::SeqCst);
                // TODO: Start periodic sampling
                info!("Cache monitoring started with sample rate: {}", sample_rate);
            }
        }
    }
    
    /// Stop cache monitoring
    pub fn stop_monitoring() {
        unsafe {
            if let Some(profiler) = CACHE_PROFILER.as_mut() {
                let current = profiler.active_monitors.fetch_sub(1, Ordering::SeqCst);
                if current <= 1 {
                    info!("Cache monitoring stopped");
                }
            }
        }
    }
    
    /// Generate visualization data for cache performance
    pub fn generate_visualization_data(&self) -> CacheVisualizationData {
        let stats = self.stats.read();
        let accesses = self.recent_accesses.read();
        
        CacheVisualizationData {
            l1_hit_ratio: stats[0].hit_ratio,
            l2_hit_ratio: stats[1].hit_ratio,
            l3_hit_ratio: stats[2].hit_ratio,
            tlb_hit_ratio: stats[3].hit_ratio,
            l1_latency: stats[0].average_latency,
            l2_latency: stats[1].average_latency,
            l3_latency: stats[2].average_latency,
            recent_accesses: accesses.len(),
            access_distribution: self.analyze_access_distribution(),
        }
    }
    
    /// Analyze access distribution patterns
    fn analyze_access_distribution(&self) -> AccessDistribution {
        let accesses = self.recent_accesses.read();
        let mut read_count = 0;
        let mut write_count = 0;
        let mut prefetch_count = 0;
        
        for access in accesses.iter() {
            if access.access_type.contains(CacheAccessType::READ) {
                read_count += 1;
            }
            if access.access_type.contains(CacheAccessType::WRITE) {
                write_count += 1;
            }
            if access.access_type.contains(CacheAccessType::PREFETCH) {
                prefetch_count += 1;
            }
        }
        
        let total = read_count + write_count + prefetch_count;
        
        AccessDistribution {
            read_ratio: if total > 0 { read_count as f32 / total as f32 } else { 0.0 },
            write_ratio: if total > 0 { write_count as f32 / total as f32 } else { 0.0 },
            prefetch_ratio: if total > 0 { prefetch_count as f32 / total as f32 } else { 0.0 },
        }
    }
}

/// Cache performance report
#[derive(Debug, Clone)]
pub struct CachePerformanceReport {
    pub l1_stats: CacheStats,
    pub l2_stats: CacheStats,
    pub l3_stats: CacheStats,
    pub tlb_stats: CacheStats,
    pub overall_hit_ratio: f32,
    pub total_accesses: u64,
    pub recent_accesses: usize,
    pub access_patterns: usize,
}

/// Cache optimization recommendation
#[derive(Debug, Clone)]
pub struct CacheRecommendation {
    pub level: CacheLevel,
    pub type_: CacheRecommendationType,
    pub description: String,
    pub priority: CachePriority,
    pub impact_score: u32,
}

#[derive(Debug, Clone)]
pub enum CacheRecommendationType {
    IncreaseCacheSize,
    OptimizeLatency,
    ImproveLocality,
    EnablePrefetching,
    AdjustCachePolicy,
}

#[derive(Debug, Clone)]
pub enum CachePriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Cache visualization data
#[derive(Debug, Clone)]
pub struct CacheVisualizationData {
    pub l1_hit_ratio: f32,
    pub l2_hit_ratio: f32,
    pub l3_hit_ratio: f32,
    pub tlb_hit_ratio: f32,
    pub l1_latency: f32,
    pub l2_latency: f32,
    pub l3_latency: f32,
    pub recent_accesses: usize,
    pub access_distribution: AccessDistribution,
}

/// Access distribution analysis
#[derive(Debug, Clone)]
pub struct AccessDistribution {
    pub read_ratio: f32,
    pub write_ratio: f32,
    pub prefetch_ratio: f32,
}

/// Helper functions
fn level_name(level: CacheLevel) -> &'static str {
    match level {
        CacheLevel::L1 => "L1",
        CacheLevel::L2 => "L2", 
        CacheLevel::L3 => "L3",
        CacheLevel::TLB => "TLB",
    }
}

// Global cache profiler instance
static mut CACHE_PROFILER: Option<CacheProfiler> = None;

// Placeholder functions
fn get_timestamp() -> u64 {
    // TODO: Integrate with actual system time
    0
}