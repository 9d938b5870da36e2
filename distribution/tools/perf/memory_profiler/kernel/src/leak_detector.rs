//! Memory Leak Detection and Reporting
//!
//! This module provides comprehensive memory leak detection capabilities including
//! automatic leak detection, suspicious allocation pattern analysis, and detailed
//! leak reporting with caller tracking.

use core::sync::atomic::{AtomicU64, AtomicU32, Ordering};
use spin::RwLock;
use log::warn;
use std::collections::HashMap;

/// Memory allocation record
#[derive(Debug, Clone)]
pub struct AllocationRecord {
    pub address: u64,
    pub size: usize,
    pub caller: u64,
    pub timestamp: u64,
    pub allocation_id: u64,
    pub flags: AllocationFlags,
    pub node: u8,
}

/// Potential leak candidate
#[derive(Debug, Clone)]
pub struct LeakCandidate {
    pub allocation_record: AllocationRecord,
    pub age: u64,
    pub suspicion_score: f32,
    pub leak_type: LeakType,
    pub impact_score: u64,
}

/// Leak detection statistics
#[derive(Debug, Clone)]
pub struct LeakStats {
    pub total_allocations: AtomicU64,
    pub total_deallocations: AtomicU64,
    pub active_allocations: AtomicU64,
    pub leaked_allocations: AtomicU64,
    pub false_positives: AtomicU64,
    pub detected_leaks: AtomicU64,
    pub memory_waste: AtomicU64,
}

/// Leak analysis report
#[derive(Debug, Clone)]
pub struct LeakAnalysisReport {
    pub timestamp: u64,
    pub total_active_allocations: u64,
    pub detected_leaks: Vec<LeakCandidate>,
    pub suspicious_patterns: Vec<SuspiciousPattern>,
    pub memory_waste_estimate: u64,
    pub recommendations: Vec<LeakRecommendation>,
}

/// Suspicious allocation pattern
#[derive(Debug, Clone)]
pub struct SuspiciousPattern {
    pub pattern_type: PatternType,
    pub caller: u64,
    pub frequency: u32,
    pub total_size: u64,
    pub description: String,
    pub confidence: f32,
}

#[derive(Debug, Clone)]
pub enum PatternType {
    OrphanedAllocations,
    MemoryBloat,
    AllocationGrowth,
    RepeatedAllocation,
    ResourceLeak,
}

/// Leak types
#[derive(Debug, Clone, PartialEq)]
pub enum LeakType {
    Direct,
    Indirect,
    Resource,
    Fragmentation,
    ReferenceCycle,
}

/// Leak detection recommendations
#[derive(Debug, Clone)]
pub struct LeakRecommendation {
    pub type_: RecommendationType,
    pub description: String,
    pub priority: LeakPriority,
    pub estimated_impact: u64,
    pub suggested_fix: String,
}

#[derive(Debug, Clone)]
pub enum RecommendationType {
    AddDestructor,
    UseSmartPointers,
    OptimizeLifetime,
    FixReferenceCycle,
    ImplementResourceCleanup,
}

#[derive(Debug, Clone)]
pub enum LeakPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone)]
pub struct AllocationFlags(u32);

impl AllocationFlags {
    pub fn new() -> Self {
        Self(0)
    }
    
    pub fn set_never_freed(&mut self) {
        self.0 |= 1;
    }
    
    pub fn set_long_lived(&mut self) {
        self.0 |= 1 << 1;
    }
    
    pub fn is_never_freed(&self) -> bool {
        self.0 & 1 != 0
    }
    
    pub fn is_long_lived(&self) -> bool {
        self.0 & (1 << 1) != 0
    }
}

impl Default for AllocationFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Main leak detection system
pub struct LeakDetector {
    active_allocations: RwLock<HashMap<u64, AllocationRecord>>,
    allocation_history: RwLock<Vec<AllocationRecord>>,
    leak_stats: LeakStats,
    leak_threshold_age: u64,     // Age threshold for leak detection
    leak_threshold_size: usize,  // Size threshold for leak detection
    max_tracked_allocations: usize,
    allocation_counter: AtomicU64,
    leak_scan_interval: u64,    // ms between leak scans
    last_scan_time: AtomicU64,
    detection_enabled: AtomicU32,
    false_positive_rate: f32,
}

impl LeakDetector {
    /// Initialize the leak detector
    pub fn init() {
        let detector = LeakDetector {
            active_allocations: RwLock::new(HashMap::new()),
            allocation_history: RwLock::new(Vec::new()),
            leak_stats: LeakStats {
                total_allocations: AtomicU64::new(0),
                total_deallocations: AtomicU64::new(0),
                active_allocations: AtomicU64::new(0),
                leaked_allocations: AtomicU64::new(0),
                false_positives: AtomicU64::new(0),
                detected_leaks: AtomicU64::new(0),
                memory_waste: AtomicU64::new(0),
            },
            leak_threshold_age: 60000,    // 60 seconds
            leak_threshold_size: 1024,   // 1KB
            max_tracked_allocations: 1000000,
            allocation_counter: AtomicU64::new(0),
            leak_scan_interval: 30000,   // 30 seconds
            last_scan_time: AtomicU64::new(0),
            detection_enabled: AtomicU32::new(1),
            false_positive_rate: 0.05,   // 5% false positive rate
        };
        
        unsafe {
            LEAK_DETECTOR = Some(detector);
        }
        
        info!("Memory leak detector initialized");
    }
    
    /// Record an allocation
    pub fn record_allocation(address: u64, size: usize, caller: u64, node: u8, 
                           flags: AllocationFlags) -> u64 {
        unsafe {
            if let Some(detector) = LEAK_DETECTOR.as_ref() {
                let allocation_id = detector.allocation_counter.fetch_add(1, Ordering::SeqCst);
                
                let record = AllocationRecord {
                    address,
                    size,
                    caller,
                    timestamp: get_timestamp(),
                    allocation_id,
                    flags,
                    node,
                };
                
                // Store in active allocations
                {
                    let mut active = detector.active_allocations.write();
                    active.insert(address, record.clone());
                    
                    // Limit tracked allocations
                    if active.len() > detector.max_tracked_allocations {
                        // Remove oldest entries (simplified approach)
                        let mut to_remove = active.len() - detector.max_tracked_allocations;
                        let keys_to_remove: Vec<u64> = active.keys().take(to_remove).cloned().collect();
                        for key in keys_to_remove {
                            active.remove(&key);
                        }
                    }
                }
                
                // Store in history
                detector.allocation_history.write().push(record);
                
                // Update statistics
                detector.leak_stats.total_allocations.fetch_add(1, Ordering::SeqCst);
                detector.leak_stats.active_allocations.fetch_add(1, Ordering::SeqCst);
                
                allocation_id
            } else {
                0
            }
        }
    }
    
    /// Record a deallocation
    pub fn record_deallocation(address: u64) {
        unsafe {
            if let Some(detector) = LEAK_DETECTOR.as_ref() {
                if let Some(record) = detector.active_allocations.write().remove(&address) {
                    detector.leak_stats.total_deallocations.fetch_add(1, Ordering::SeqCst);
                    detector.leak_stats.active_allocations.fetch_sub(1, Ordering::SeqCst);
                    
                    // Check if this was suspected to be leaked
                    if record.flags.is_never_freed() {
                        detector.leak_stats.false_positives.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }
        }
    }
    
    /// Perform leak detection scan
    pub fn scan_for_leaks(&self) -> LeakAnalysisReport {
        let current_time = get_timestamp();
        let last_scan = self.last_scan_time.load(Ordering::SeqCst);
        
        if current_time < last_scan + self.leak_scan_interval {
            // Not time for a scan yet
            return LeakAnalysisReport {
                timestamp: current_time,
                total_active_allocations: self.leak_stats.active_allocations.load(Ordering::SeqCst),
                detected_leaks: Vec::new(),
                suspicious_patterns: Vec::new(),
                memory_waste_estimate: 0,
                recommendations: Vec::new(),
            };
        }
        
        self.last_scan_time.store(current_time, Ordering::SeqCst);
        
        let active_allocations = self.active_allocations.read();
        let mut detected_leaks = Vec::new();
        let mut suspicious_patterns = Vec::new();
        let mut memory_waste_estimate = 0u64;
        
        // Scan for individual leaked allocations
        for (address, record) in active_allocations.iter() {
            let age = current_time - record.timestamp;
            
            if age > self.leak_threshold_age && record.size > self.leak_threshold_size {
                let suspicion_score = self.calculate_suspicion_score(record, age);
                
                if suspicion_score > 0.7 {
                    let leak_type = self.classify_leak_type(record, &suspicious_patterns);
                    let impact_score = record.size as u64 * (age / 1000); // Size * age in seconds
                    
                    detected_leaks.push(LeakCandidate {
                        allocation_record: record.clone(),
                        age,
                        suspicion_score,
                        leak_type,
                        impact_score,
                    });
                    
                    memory_waste_estimate += record.size as u64;
                }
            }
        }
        
        // Analyze patterns
        self.analyze_patterns(&active_allocations, &mut suspicious_patterns);
        
        // Sort leaks by suspicion score
        detected_leaks.sort_by(|a, b| b.suspicion_score.partial_cmp(&a.suspicion_score).unwrap());
        
        // Generate recommendations
        let recommendations = self.generate_recommendations(&detected_leaks, &suspicious_patterns);
        
        // Update statistics
        self.leak_stats.detected_leaks.store(detected_leaks.len() as u64, Ordering::SeqCst);
        self.leak_stats.memory_waste.store(memory_waste_estimate, Ordering::SeqCst);
        
        LeakAnalysisReport {
            timestamp: current_time,
            total_active_allocations: active_allocations.len() as u64,
            detected_leaks,
            suspicious_patterns,
            memory_waste_estimate,
            recommendations,
        }
    }
    
    /// Calculate suspicion score for an allocation
    fn calculate_suspicion_score(&self, record: &AllocationRecord, age: u64) -> f32 {
        let mut score = 0.0;
        
        // Base score from age
        let age_score = (age as f32 / (self.leak_threshold_age as f32)).min(2.0);
        score += age_score * 0.3;
        
        // Base score from size
        let size_score = (record.size as f32 / (self.leak_threshold_size as f32)).min(5.0);
        score += size_score * 0.2;
        
        // Check if allocation is marked as never freed
        if record.flags.is_never_freed() {
            score += 0.5;
        }
        
        // Analyze allocation pattern
        let history = self.allocation_history.read();
        let caller_allocations: Vec<_> = history.iter()
            .filter(|r| r.caller == record.caller)
            .collect();
        
        if caller_allocations.len() > 10 {
            score += 0.3; // Frequent allocation from same site
        }
        
        score.min(1.0)
    }
    
    /// Classify the type of leak
    fn classify_leak_type(&self, record: &AllocationRecord, 
                         patterns: &[SuspiciousPattern]) -> LeakType {
        // Simple classification based on size and frequency
        if record.size > 1024 * 1024 { // Large allocations
            LeakType::Resource
        } else {
            // Check if caller has multiple suspicious allocations
            let suspicious_from_caller = patterns.iter()
                .filter(|p| p.caller == record.caller)
                .count();
            
            if suspicious_from_caller > 5 {
                LeakType::ReferenceCycle
            } else if suspicious_from_caller > 1 {
                LeakType::Indirect
            } else {
                LeakType::Direct
            }
        }
    }
    
    /// Analyze allocation patterns for suspicious behavior
    fn analyze_patterns(&self, active_allocations: &HashMap<u64, AllocationRecord>,
                       patterns: &mut Vec<SuspiciousPattern>) {
        let history = self.allocation_history.read();
        let mut caller_stats = HashMap::new();
        
        // Group allocations by caller
        for record in history.iter() {
            caller_stats.entry(record.caller)
                .or_insert_with(|| CallerStats::new())
                .add_record(record);
        }
        
        // Analyze each caller's pattern
        for (caller, stats) in caller_stats {
            if stats.total_allocations > 10 {
                let pattern_type = self.determine_pattern_type(&stats);
                
                if pattern_type.is_some() {
                    patterns.push(SuspiciousPattern {
                        pattern_type: pattern_type.unwrap(),
                        caller,
                        frequency: stats.total_allocations,
                        total_size: stats.total_size,
                        description: format!("Caller {} shows {} pattern", 
                                          caller, pattern_type.unwrap()),
                        confidence: self.calculate_pattern_confidence(&stats),
                    });
                }
            }
        }
    }
    
    /// Determine pattern type from caller statistics
    fn determine_pattern_type(&self, stats: &CallerStats) -> Option<PatternType> {
        let allocation_rate = stats.total_allocations as f32 / 
                            (stats.time_span as f32 / 1000.0); // allocations per second
        
        let size_variance = self.calculate_size_variance(&stats);
        
        if stats.total_allocations > 100 && stats.orphaned_count > stats.total_allocations / 2 {
            Some(PatternType::OrphanedAllocations)
        } else if stats.avg_size > 1024 * 1024 && stats.total_size > 100 * 1024 * 1024 {
            Some(PatternType::MemoryBloat)
        } else if allocation_rate > 100.0 {
            Some(PatternType::AllocationGrowth)
        } else if stats.unique_sizes < 5 && stats.total_allocations > 50 {
            Some(PatternType::RepeatedAllocation)
        } else if size_variance < 100.0 {
            Some(PatternType::ResourceLeak)
        } else {
            None
        }
    }
    
    /// Calculate pattern confidence score
    fn calculate_pattern_confidence(&self, stats: &CallerStats) -> f32 {
        let mut confidence = 0.5;
        
        if stats.total_allocations > 100 {
            confidence += 0.2;
        }
        
        if stats.orphaned_count > stats.total_allocations / 3 {
            confidence += 0.3;
        }
        
        confidence.min(1.0)
    }
    
    /// Generate leak detection recommendations
    fn generate_recommendations(&self, leaks: &[LeakCandidate], 
                              patterns: &[SuspiciousPattern]) -> Vec<LeakRecommendation> {
        let mut recommendations = Vec::new();
        
        // Generate recommendations for detected leaks
        for leak in leaks.iter().take(10) { // Top 10 leaks
            match leak.leak_type {
                LeakType::Direct => {
                    recommendations.push(LeakRecommendation {
                        type_: RecommendationType::AddDestructor,
                        description: format!("Add destructor for allocation at 0x{:x} ({} bytes)", 
                                          leak.allocation_record.caller, 
                                          leak.allocation_record.size),
                        priority: LeakPriority::High,
                        estimated_impact: leak.impact_score,
                        suggested_fix: "Implement proper cleanup/deallocation in object destructor".to_string(),
                    });
                }
                LeakType::ReferenceCycle => {
                    recommendations.push(LeakRecommendation {
                        type_: RecommendationType::FixReferenceCycle,
                        description: format!("Fix reference cycle at caller 0x{:x}", 
                                          leak.allocation_record.caller),
                        priority: LeakPriority::Critical,
                        estimated_impact: leak.impact_score * 2,
                        suggested_fix: "Use weak references or implement manual break of reference cycles".to_string(),
                    });
                }
                _ => {}
            }
        }
        
        // Generate recommendations for patterns
        for pattern in patterns.iter().take(5) {
            match pattern.pattern_type {
                PatternType::OrphanedAllocations => {
                    recommendations.push(LeakRecommendation {
                        type_: RecommendationType::UseSmartPointers,
                        description: format!("Consider smart pointers for caller 0x{:x}", pattern.caller),
                        priority: LeakPriority::High,
                        estimated_impact: pattern.total_size * 2,
                        suggested_fix: "Replace raw pointers with Rc/Arc or Box for automatic memory management".to_string(),
                    });
                }
                PatternType::MemoryBloat => {
                    recommendations.push(LeakRecommendation {
                        type_: RecommendationType::OptimizeLifetime,
                        description: format!("Optimize allocation lifetime for caller 0x{:x}", pattern.caller),
                        priority: LeakPriority::Medium,
                        estimated_impact: pattern.total_size / 2,
                        suggested_fix: "Review allocation lifetime and consider memory pooling or object reuse".to_string(),
                    });
                }
                _ => {}
            }
        }
        
        recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
        recommendations
    }
    
    /// Get leak detection statistics
    pub fn get_statistics(&self) -> LeakDetectionStatistics {
        LeakDetectionStatistics {
            total_allocations: self.leak_stats.total_allocations.load(Ordering::SeqCst),
            total_deallocations: self.leak_stats.total_deallocations.load(Ordering::SeqCst),
            active_allocations: self.leak_stats.active_allocations.load(Ordering::SeqCst),
            leaked_allocations: self.leak_stats.leaked_allocations.load(Ordering::SeqCst),
            false_positives: self.leak_stats.false_positives.load(Ordering::SeqCst),
            detected_leaks: self.leak_stats.detected_leaks.load(Ordering::SeqCst),
            memory_waste: self.leak_stats.memory_waste.load(Ordering::SeqCst),
            detection_rate: self.leak_stats.detected_leaks.load(Ordering::SeqCst) as f32 / 
                           self.leak_stats.total_allocations.load(Ordering::SeqCst) as f32,
        }
    }
    
    /// Enable/disable leak detection
    pub fn set_enabled(enabled: bool) {
        unsafe {
            if let Some(detector) = LEAK_DETECTOR.as_mut() {
                if enabled {
                    detector.detection_enabled.store(1, Ordering::SeqCst);
                    info!("Memory leak detection enabled");
                } else {
                    detector.detection_enabled.store(0, Ordering::SeqCst);
                    info!("Memory leak detection disabled");
                }
            }
        }
    }
    
    /// Clear all tracked allocations
    pub fn clear_tracking() {
        unsafe {
            if let Some(detector) = LEAK_DETECTOR.as_mut() {
                detector.active_allocations.write().clear();
                detector.allocation_history.write().clear();
                detector.leak_stats = LeakStats {
                    total_allocations: AtomicU64::new(0),
                    total_deallocations: AtomicU64::new(0),
                    active_allocations: AtomicU64::new(0),
                    leaked_allocations: AtomicU64::new(0),
                    false_positives: AtomicU64::new(0),
                    detected_leaks: AtomicU64::new(0),
                    memory_waste: AtomicU64::new(0),
                };
                info!("Memory leak tracking data cleared");
            }
        }
    }
}

/// Statistics for a single caller
struct CallerStats {
    total_allocations: u32,
    total_size: u64,
    orphaned_count: u32,
    avg_size: f32,
    unique_sizes: u32,
    time_span: u64,
    first_allocation: u64,
    last_allocation: u64,
}

impl CallerStats {
    fn new() -> Self {
        Self {
            total_allocations: 0,
            total_size: 0,
            orphaned_count: 0,
            avg_size: 0.0,
            unique_sizes: 0,
            time_span: 0,
            first_allocation: u64::MAX,
            last_allocation: 0,
        }
    }
    
    fn add_record(&mut self, record: &AllocationRecord) {
        self.total_allocations += 1;
        self.total_size += record.size as u64;
        self.last_allocation = record.timestamp;
        
        if record.timestamp < self.first_allocation {
            self.first_allocation = record.timestamp;
        }
        
        self.time_span = self.last_allocation - self.first_allocation;
        self.avg_size = self.total_size as f32 / self.total_allocations as f32;
        
        // Count orphaned allocations (those that might be leaked)
        if record.flags.is_never_freed() || record.flags.is_long_lived() {
            self.orphaned_count += 1;
        }
    }
}

impl Default for CallerStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate size variance for caller statistics
fn calculate_size_variance(&self) -> f32 {
    // Simplified variance calculation - in real implementation,
    // we'd store all sizes and calculate proper variance
    self.avg_size * 0.3 // Placeholder
}

/// Leak detection statistics summary
#[derive(Debug, Clone)]
pub struct LeakDetectionStatistics {
    pub total_allocations: u64,
    pub total_deallocations: u64,
    pub active_allocations: u64,
    pub leaked_allocations: u64,
    pub false_positives: u64,
    pub detected_leaks: u64,
    pub memory_waste: u64,
    pub detection_rate: f32,
}

/// Global leak detector instance
static mut LEAK_DETECTOR: Option<LeakDetector> = None;

// Placeholder function
fn get_timestamp() -> u64 {
    // TODO: Integrate with actual system time
    0
}