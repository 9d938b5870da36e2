//! NUMA-Aware Memory Allocation Strategies
//!
//! This module provides comprehensive NUMA (Non-Uniform Memory Access) memory
//! profiling and optimization including node utilization, memory migration,
//! and locality-aware allocation policies.

use core::sync::atomic::{AtomicU64, AtomicU32, AtomicUsize, Ordering};
use spin::RwLock;
use log::info;
use bitflags::bitflags;

/// NUMA node information
#[derive(Debug, Clone)]
pub struct NUMANode {
    pub node_id: u8,
    pub total_memory: u64,
    pub free_memory: u64,
    pub used_memory: u64,
    pub cpu_list: Vec<u32>,
    pub memory_bandwidth: u64,    // GB/s
    pub access_latency: u32,      // nanoseconds
    pub inter_node_distances: Vec<u32>,
    pub temperature: f32,
    pub utilization: f32,
}

/// Memory access pattern
#[derive(Debug, Clone)]
pub struct MemoryAccessPattern {
    pub address: u64,
    pub size: usize,
    pub access_type: AccessType,
    pub frequency: u32,
    pub node_preference: u8,
    pub locality_score: f32,
}

/// NUMA allocation statistics
#[derive(Debug, Clone)]
pub struct NUMAStats {
    pub total_allocations: AtomicU64,
    pub numa_local_allocations: AtomicU64,
    pub numa_remote_allocations: AtomicU64,
    pub migration_count: AtomicU64,
    pub bandwidth_utilization: AtomicU64,
    pub latency_violations: AtomicU64,
    pub load_balancing_events: AtomicU64,
    pub memory_pressure: f32,
}

/// NUMA optimization report
#[derive(Debug, Clone)]
pub struct NUMAOptimizationReport {
    pub timestamp: u64,
    pub node_statistics: Vec<NodeStatistics>,
    pub access_patterns: Vec<MemoryAccessPattern>,
    pub optimization_opportunities: Vec<OptimizationOpportunity>,
    pub migration_recommendations: Vec<MigrationRecommendation>,
    pub policy_adjustments: Vec<PolicyAdjustment>,
    pub load_balancing_suggestions: Vec<LoadBalancingSuggestion>,
}

/// Node-specific statistics
#[derive(Debug, Clone)]
pub struct NodeStatistics {
    pub node_id: u8,
    pub allocation_count: u64,
    pub deallocation_count: u64,
    pub current_usage: u64,
    pub peak_usage: u64,
    pub bandwidth_utilization: f32,
    pub access_latency: u32,
    pub thermal_pressure: f32,
    pub memory_fragmentation: f32,
    pub preferred_access_ratio: f32,
}

/// Optimization opportunity
#[derive(Debug, Clone)]
pub struct OptimizationOpportunity {
    pub opportunity_type: OptimizationType,
    pub affected_nodes: Vec<u8>,
    pub description: String,
    pub potential_improvement: f32,
    pub implementation_cost: CostLevel,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationType {
    MemoryMigration,
    PolicyTuning,
    LoadBalancing,
    TopologyOptimization,
    BandwidthOptimization,
    ThermalManagement,
}

#[derive(Debug, Clone)]
pub enum CostLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Memory migration recommendation
#[derive(Debug, Clone)]
pub struct MigrationRecommendation {
    pub memory_region: MemoryRegion,
    pub current_node: u8,
    pub target_node: u8,
    pub migration_reason: MigrationReason,
    pub expected_benefit: f32,
    pub urgency: Urgency,
    pub estimated_cost: u64,
}

#[derive(Debug, Clone)]
pub enum MigrationReason {
    LoadBalancing,
    ThermalOptimization,
    BandwidthOptimization,
    AccessLocality,
    Defragmentation,
}

#[derive(Debug, Clone)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Immediate,
}

/// Policy adjustment suggestion
#[derive(Debug, Clone)]
pub struct PolicyAdjustment {
    pub policy_type: PolicyType,
    pub current_value: u32,
    pub suggested_value: u32,
    pub reason: String,
    pub expected_impact: f32,
}

#[derive(Debug, Clone)]
pub enum PolicyType {
    AllocationPolicy,
    MigrationThreshold,
    LoadBalanceWeight,
    BandwidthThreshold,
    ThermalThreshold,
}

/// Load balancing suggestion
#[derive(Debug, Clone)]
pub struct LoadBalancingSuggestion {
    pub source_node: u8,
    pub target_node: u8,
    pub suggested_migration_amount: u64,
    pub load_difference: f32,
    pub bandwidth_impact: f32,
    pub latency_impact: f32,
}

bitflags! {
    /// NUMA allocation flags
    pub struct NUMAFlags: u32 {
        const LOCAL_FIRST = 0b0001;
        const INTERLEAVE = 0b0010;
        const BIND = 0b0100;
        const PREFERRED = 0b1000;
        const MIGRATE_ON_WRITE = 0b10000;
        const THERMAL_AWARE = 0b100000;
        const BANDWIDTH_AWARE = 0b1000000;
    }
}

/// Memory region definition
#[derive(Debug, Clone)]
pub struct MemoryRegion {
    pub start_address: u64,
    pub end_address: u64,
    pub size: usize,
    pub current_node: u8,
    pub access_count: u64,
    pub last_access: u64,
    pub is_migratable: bool,
}

#[derive(Debug, Clone)]
pub enum AccessType {
    Read,
    Write,
    ReadWrite,
    Atomic,
    Prefetch,
}

/// Main NUMA profiler and optimizer
pub struct NUMAProfiler {
    // NUMA topology information
    numa_nodes: RwLock<Vec<NUMANode>>,
    node_statistics: RwLock<Vec<NodeStatistics>>,
    
    // Memory tracking
    memory_regions: RwLock<Vec<MemoryRegion>>,
    access_patterns: RwLock<std::collections::HashMap<u64, MemoryAccessPattern>>,
    
    // Statistics
    numa_stats: NUMAStats,
    
    // Configuration
    allocation_policy: AtomicU32,
    migration_threshold: AtomicU32,
    load_balance_threshold: f32,
    thermal_threshold: f32,
    bandwidth_threshold: u64,
    
    // Optimization tracking
    optimization_suggestions: RwLock<Vec<OptimizationOpportunity>>,
    migration_history: RwLock<Vec<MigrationEvent>>,
    last_optimization_time: AtomicU64,
    optimization_interval: u64,
}

/// Migration event record
#[derive(Debug, Clone)]
pub struct MigrationEvent {
    pub timestamp: u64,
    pub source_node: u8,
    pub target_node: u8,
    pub memory_size: u64,
    pub migration_reason: MigrationReason,
    pub success: bool,
    pub duration_ms: u64,
}

impl NUMAProfiler {
    /// Initialize the NUMA profiler
    pub fn init() {
        let profiler = NUMAProfiler {
            numa_nodes: RwLock::new(Vec::new()),
            node_statistics: RwLock::new(Vec::new()),
            memory_regions: RwLock::new(Vec::new()),
            access_patterns: RwLock::new(std::collections::HashMap::new()),
            numa_stats: NUMAStats {
                total_allocations: AtomicU64::new(0),
                numa_local_allocations: AtomicU64::new(0),
                numa_remote_allocations: AtomicU64::new(0),
                migration_count: AtomicU64::new(0),
                bandwidth_utilization: AtomicU64::new(0),
                latency_violations: AtomicU64::new(0),
                load_balancing_events: AtomicU64::new(0),
                memory_pressure: 0.0,
            },
            allocation_policy: AtomicU32::new(PolicyType::LOCAL_FIRST as u32),
            migration_threshold: AtomicU32::new(80), // 80% threshold
            load_balance_threshold: 0.2, // 20% difference
            thermal_threshold: 70.0, // 70°C
            bandwidth_threshold: 80, // 80% of max bandwidth
            optimization_suggestions: RwLock::new(Vec::new()),
            migration_history: RwLock::new(Vec::new()),
            last_optimization_time: AtomicU64::new(0),
            optimization_interval: 10000, // 10 seconds
        };
        
        // Initialize NUMA topology
        profiler.initialize_numa_topology();
        
        unsafe {
            NUMA_PROFILER = Some(profiler);
        }
        
        info!("NUMA profiler initialized");
    }
    
    /// Initialize NUMA topology from system
    fn initialize_numa_topology(&self) {
        // In a real implementation, this would query the actual NUMA topology
        let mut nodes = Vec::new();
        let node_count = get_num_numa_nodes();
        
        for node_id in 0..node_count {
            let node_info = NUMANode {
                node_id,
                total_memory: 8 * 1024 * 1024 * 1024, // 8GB per node
                free_memory: 4 * 1024 * 1024 * 1024,  // 4GB free initially
                used_memory: 4 * 1024 * 1024 * 1024,  // 4GB used
                cpu_list: get_node_cpus(node_id),
                memory_bandwidth: 50, // 50 GB/s
                access_latency: get_node_latency(node_id),
                inter_node_distances: self.calculate_inter_node_distances(node_id, node_count),
                temperature: 45.0 + (node_id as f32 * 5.0), // Simulated temperatures
                utilization: 0.5,
            };
            nodes.push(node_info);
        }
        
        self.numa_nodes.write().extend(nodes);
        
        // Initialize node statistics
        let mut statistics = Vec::new();
        for node_id in 0..node_count {
            statistics.push(NodeStatistics {
                node_id,
                allocation_count: 0,
                deallocation_count: 0,
                current_usage: 4 * 1024 * 1024 * 1024, // 4GB
                peak_usage: 4 * 1024 * 1024 * 1024,
                bandwidth_utilization: 0.0,
                access_latency: get_node_latency(node_id),
                thermal_pressure: 0.0,
                memory_fragmentation: 0.0,
                preferred_access_ratio: 0.8, // 80% local access
            });
        }
        
        self.node_statistics.write().extend(statistics);
    }
    
    /// Calculate inter-node distances (simplified)
    fn calculate_inter_node_distances(&self, node_id: u8, total_nodes: u8) -> Vec<u32> {
        let mut distances = Vec::new();
        for other_id in 0..total_nodes {
            if node_id == other_id {
                distances.push(10); // Local access latency
            } else {
                // Simulate distance based on node positioning
                let distance = 10 + (node_id * other_id) as u32;
                distances.push(distance);
            }
        }
        distances
    }
    
    /// Allocate memory with NUMA awareness
    pub fn numa_allocate(size: usize, flags: NUMAFlags, preferred_node: Option<u8>) -> AllocationResult {
        unsafe {
            if let Some(profiler) = NUMA_PROFILER.as_ref() {
                profiler._numa_allocate(size, flags, preferred_node)
            } else {
                AllocationResult {
                    address: 0,
                    node_id: 0,
                    success: false,
                    latency_estimate: 0,
                    reason: "NUMA profiler not initialized".to_string(),
                }
            }
        }
    }
    
    /// Internal NUMA allocation implementation
    fn _numa_allocate(&self, size: usize, flags: NUMAFlags, preferred_node: Option<u8>) -> AllocationResult {
        let nodes = self.numa_nodes.read();
        let node_stats = self.node_statistics.read();
        
        // Determine target node based on allocation policy
        let target_node = self.select_allocation_node(size, flags, preferred_node, &nodes, &node_stats);
        
        if target_node >= nodes.len() {
            return AllocationResult {
                address: 0,
                node_id: 0,
                success: false,
                latency_estimate: 0,
                reason: "No suitable NUMA node found".to_string(),
            };
        }
        
        let target_node_info = &nodes[target_node];
        
        // Check if node has sufficient memory
        if target_node_info.free_memory < size as u64 {
            return AllocationResult {
                address: 0,
                node_id: target_node as u8,
                success: false,
                latency_estimate: 0,
                reason: "Insufficient memory on target node".to_string(),
            };
        }
        
        // Simulate allocation (in reality would call actual allocator)
        let address = self.simulate_allocation(target_node, size);
        
        // Update statistics
        let mut node_stats_mut = self.node_statistics.write();
        if target_node < node_stats_mut.len() {
            node_stats_mut[target_node].allocation_count += 1;
            node_stats_mut[target_node].current_usage += size as u64;
            if node_stats_mut[target_node].current_usage > node_stats_mut[target_node].peak_usage {
                node_stats_mut[target_node].peak_usage = node_stats_mut[target_node].current_usage;
            }
        }
        
        // Update global statistics
        self.numa_stats.total_allocations.fetch_add(1, Ordering::SeqCst);
        if preferred_node.map_or(false, |pn| pn == target_node as u8) {
            self.numa_stats.numa_local_allocations.fetch_add(1, Ordering::SeqCst);
        } else {
            self.numa_stats.numa_remote_allocations.fetch_add(1, Ordering::SeqCst);
        }
        
        AllocationResult {
            address,
            node_id: target_node as u8,
            success: true,
            latency_estimate: target_node_info.access_latency,
            reason: "Success".to_string(),
        }
    }
    
    /// Select optimal NUMA node for allocation
    fn select_allocation_node(&self, size: usize, flags: NUMAFlags, preferred_node: Option<u8>,
                             nodes: &[NUMANode], node_stats: &[NodeStatistics]) -> usize {
        let mut best_node = 0usize;
        let mut best_score = f32::MIN;
        
        for (index, node) in nodes.iter().enumerate() {
            if index >= node_stats.len() {
                continue;
            }
            
            let mut score = 0.0;
            
            // Calculate locality score
            if preferred_node.map_or(false, |pn| pn == node.node_id) {
                score += 100.0; // Strong preference for preferred node
            }
            
            // Consider allocation policy
            match policy_from_u32(flags.bits()) {
                PolicyType::LOCAL_FIRST => {
                    if preferred_node.map_or(false, |pn| pn == node.node_id) {
                        score += 50.0;
                    } else {
                        score -= 30.0;
                    }
                }
                PolicyType::INTERLEAVE => {
                    // Distribute load evenly
                    let load_factor = 1.0 - (node_stats[index].current_usage as f32 / node.total_memory as f32);
                    score += load_factor * 40.0;
                }
                PolicyType::BANDWIDTH_AWARE => {
                    let bandwidth_factor = node.memory_bandwidth as f32 / 100.0; // Normalize
                    score += bandwidth_factor * 30.0;
                }
                PolicyType::THERMAL_AWARE => {
                    let thermal_factor = (80.0 - node.temperature) / 80.0; // Cooler is better
                    score += thermal_factor * 25.0;
                }
                _ => {}
            }
            
            // Consider memory pressure
            let memory_pressure = node_stats[index].current_usage as f32 / node.total_memory as f32;
            if memory_pressure < 0.8 {
                score += (0.8 - memory_pressure) * 20.0;
            } else {
                score -= (memory_pressure - 0.8) * 40.0; // Penalty for high pressure
            }
            
            // Consider temperature
            if node.temperature < self.thermal_threshold {
                score += (self.thermal_threshold - node.temperature) * 2.0;
            } else {
                score -= (node.temperature - self.thermal_threshold) * 5.0;
            }
            
            if score > best_score {
                best_score = score;
                best_node = index;
            }
        }
        
        best_node
    }
    
    /// Simulate memory allocation (placeholder)
    fn simulate_allocation(&self, node_id: usize, size: usize) -> u64 {
        // In reality, this would call the actual allocator
        // For now, return a simulated address
        0x1000_0000 + (node_id as u64 * 0x1000_0000) + (size as u64)
    }
    
    /// Record memory access for pattern analysis
    pub fn record_access(address: u64, size: usize, access_type: AccessType, 
                        thread_node: u8) {
        unsafe {
            if let Some(profiler) = NUMA_PROFILER.as_ref() {
                profiler._record_access(address, size, access_type, thread_node);
            }
        }
    }
    
    /// Internal access recording
    fn _record_access(&self, address: u64, size: usize, access_type: AccessType, 
                     thread_node: u8) {
        let mut patterns = self.access_patterns.write();
        
        // Find or create memory region for this address
        let region_key = address / 4096 * 4096; // Page-aligned
        let pattern = patterns.entry(region_key).or_insert_with(|| {
            MemoryAccessPattern {
                address: region_key,
                size: 4096, // Page size
                access_type,
                frequency: 0,
                node_preference: thread_node,
                locality_score: 0.0,
            }
        });
        
        pattern.frequency += 1;
        pattern.access_type = access_type; // Use latest type
        
        // Update locality score based on access patterns
        self.update_locality_score(pattern, thread_node);
        
        // Update memory regions
        self.update_memory_region(address, size, thread_node);
    }
    
    /// Update locality score for access pattern
    fn update_locality_score(&self, pattern: &mut MemoryAccessPattern, accessing_node: u8) {
        if pattern.node_preference == accessing_node {
            pattern.locality_score = (pattern.locality_score * 0.9 + 0.1).min(1.0);
        } else {
            pattern.locality_score = (pattern.locality_score * 0.95).max(0.0);
        }
    }
    
    /// Update memory region tracking
    fn update_memory_region(&self, address: u64, size: usize, current_node: u8) {
        let mut regions = self.memory_regions.write();
        
        // Find existing region or create new one
        if let Some(region) = regions.iter_mut().find(|r| 
            address >= r.start_address && address < r.end_address) {
            region.access_count += 1;
            region.last_access = get_timestamp();
        } else {
            // Create new region
            regions.push(MemoryRegion {
                start_address: address / 4096 * 4096,
                end_address: (address + size as u64 + 4095) / 4096 * 4096,
                size: ((address + size as u64 + 4095) / 4096 * 4096) - (address / 4096 * 4096),
                current_node: current_node,
                access_count: 1,
                last_access: get_timestamp(),
                is_migratable: true,
            });
        }
    }
    
    /// Generate comprehensive NUMA optimization report
    pub fn generate_optimization_report(&self) -> NUMAOptimizationReport {
        let node_statistics = self.node_statistics.read().clone();
        let access_patterns = self.access_patterns.read();
        let patterns_vec: Vec<MemoryAccessPattern> = access_patterns.values().cloned().collect();
        
        // Identify optimization opportunities
        let optimization_opportunities = self.identify_optimization_opportunities(&node_statistics, &patterns_vec);
        
        // Generate migration recommendations
        let migration_recommendations = self.generate_migration_recommendations(&patterns_vec);
        
        // Suggest policy adjustments
        let policy_adjustments = self.suggest_policy_adjustments(&node_statistics);
        
        // Generate load balancing suggestions
        let load_balancing_suggestions = self.generate_load_balancing_suggestions(&node_statistics);
        
        NUMAOptimizationReport {
            timestamp: get_timestamp(),
            node_statistics,
            access_patterns: patterns_vec,
            optimization_opportunities,
            migration_recommendations,
            policy_adjustments,
            load_balancing_suggestions,
        }
    }
    
    /// Identify optimization opportunities
    fn identify_optimization_opportunities(&self, node_stats: &[NodeStatistics], 
                                         patterns: &[MemoryAccessPattern]) -> Vec<OptimizationOpportunity> {
        let mut opportunities = Vec::new();
        
        // Analyze load imbalance
        let load_imbalance = self.calculate_load_imbalance(node_stats);
        if load_imbalance > self.load_balance_threshold {
            opportunities.push(OptimizationOpportunity {
                opportunity_type: OptimizationType::LoadBalancing,
                affected_nodes: self.identify_heavily_loaded_nodes(node_stats),
                description: format!("Load imbalance detected: {:.2}% difference", load_imbalance * 100.0),
                potential_improvement: load_imbalance * 0.8,
                implementation_cost: CostLevel::Medium,
                priority: Priority::High,
            });
        }
        
        // Analyze bandwidth utilization
        let high_bandwidth_nodes = self.identify_high_bandwidth_usage(node_stats);
        if !high_bandwidth_nodes.is_empty() {
            opportunities.push(OptimizationOpportunity {
                opportunity_type: OptimizationType::BandwidthOptimization,
                affected_nodes: high_bandwidth_nodes,
                description: "High bandwidth utilization detected".to_string(),
                potential_improvement: 0.3,
                implementation_cost: CostLevel::High,
                priority: Priority::Medium,
            });
        }
        
        // Analyze thermal pressure
        let hot_nodes = self.identify_thermal_hotspots(node_stats);
        if !hot_nodes.is_empty() {
            opportunities.push(OptimizationOpportunity {
                opportunity_type: OptimizationType::ThermalManagement,
                affected_nodes: hot_nodes,
                description: "Thermal hotspots detected".to_string(),
                potential_improvement: 0.4,
                implementation_cost: CostLevel::Low,
                priority: Priority::Medium,
            });
        }
        
        opportunities
    }
    
    /// Generate migration recommendations
    fn generate_migration_recommendations(&self, patterns: &[MemoryAccessPattern]) -> Vec<MigrationRecommendation> {
        let mut recommendations = Vec::new();
        
        for pattern in patterns {
            if pattern.locality_score < 0.5 && pattern.frequency > 100 {
                // This memory region has poor locality and high access frequency
                // Recommend migration to the preferred node
                
                let reason = if pattern.locality_score < 0.3 {
                    MigrationReason::AccessLocality
                } else {
                    MigrationReason::LoadBalancing
                };
                
                recommendations.push(MigrationRecommendation {
                    memory_region: MemoryRegion {
                        start_address: pattern.address,
                        end_address: pattern.address + pattern.size as u64,
                        size: pattern.size,
                        current_node: 0, // Would need to track current location
                        access_count: pattern.frequency as u64,
                        last_access: get_timestamp(),
                        is_migratable: true,
                    },
                    current_node: 0, // Would need to track current location
                    target_node: pattern.node_preference,
                    migration_reason: reason,
                    expected_benefit: (1.0 - pattern.locality_score) * (pattern.frequency as f32 / 1000.0),
                    urgency: if pattern.locality_score < 0.2 { Urgency::High } else { Urgency::Medium },
                    estimated_cost: pattern.size as u64 * 1000, // Cost estimation
                });
            }
        }
        
        recommendations.sort_by(|a, b| b.expected_benefit.partial_cmp(&a.expected_benefit).unwrap());
        recommendations.truncate(10); // Limit to top 10 recommendations
        
        recommendations
    }
    
    /// Suggest policy adjustments
    fn suggest_policy_adjustments(&self, node_stats: &[NodeStatistics]) -> Vec<PolicyAdjustment> {
        let mut adjustments = Vec::new();
        
        // Analyze memory pressure patterns
        let avg_pressure: f32 = node_stats.iter()
            .map(|stats| stats.current_usage as f32 / (stats.current_usage + 1) as f32) // Simplified
            .sum::<f32>() / node_stats.len() as f32;
        
        if avg_pressure > 0.8 {
            adjustments.push(PolicyAdjustment {
                policy_type: PolicyType::MigrationThreshold,
                current_value: self.migration_threshold.load(Ordering::SeqCst),
                suggested_value: 70, // Lower threshold for aggressive migration
                reason: "High memory pressure detected".to_string(),
                expected_impact: 0.3,
            });
        }
        
        // Adjust allocation policy based on workload patterns
        let interleave_ratio = self.numa_stats.numa_remote_allocations.load(Ordering::SeqCst) as f32 /
                              (self.numa_stats.numa_local_allocations.load(Ordering::SeqCst) as f32 + 1.0);
        
        if interleave_ratio > 0.5 {
            adjustments.push(PolicyAdjustment {
                policy_type: PolicyType::AllocationPolicy,
                current_value: self.allocation_policy.load(Ordering::SeqCst),
                suggested_value: PolicyType::LOCAL_FIRST as u32,
                reason: "High remote allocation rate detected".to_string(),
                expected_impact: 0.4,
            });
        }
        
        adjustments
    }
    
    /// Generate load balancing suggestions
    fn generate_load_balancing_suggestions(&self, node_stats: &[NodeStatistics]) -> Vec<LoadBalancingSuggestion> {
        let mut suggestions = Vec::new();
        
        // Find nodes with significant load differences
        for i in 0..node_stats.len() {
            for j in (i + 1)..node_stats.len() {
                let load_diff = (node_stats[i].current_usage as f32 - node_stats[j].current_usage as f32) 
                               / ((node_stats[i].current_usage + node_stats[j].current_usage) as f32 / 2.0);
                
                if load_diff.abs() > self.load_balance_threshold {
                    let (source_node, target_node) = if load_diff > 0.0 {
                        (i, j)
                    } else {
                        (j, i)
                    };
                    
                    let migration_amount = (node_stats[source_node].current_usage - node_stats[target_node].current_usage) / 2;
                    
                    suggestions.push(LoadBalancingSuggestion {
                        source_node: node_stats[source_node].node_id,
                        target_node: node_stats[target_node].node_id,
                        suggested_migration_amount: migration_amount,
                        load_difference: load_diff.abs(),
                        bandwidth_impact: 0.1, // Simplified
                        latency_impact: 0.05, // Simplified
                    });
                }
            }
        }
        
        suggestions.sort_by(|a, b| b.load_difference.partial_cmp(&a.load_difference).unwrap());
        suggestions.truncate(5); // Limit to top 5 suggestions
        
        suggestions
    }
    
    /// Helper methods for analysis
    fn calculate_load_imbalance(&self, node_stats: &[NodeStatistics]) -> f32 {
        if node_stats.is_empty() {
            return 0.0;
        }
        
        let total_usage: f32 = node_stats.iter().map(|s| s.current_usage as f32).sum();
        let avg_usage = total_usage / node_stats.len() as f32;
        
        let variance: f32 = node_stats.iter()
            .map(|s| ((s.current_usage as f32 - avg_usage) / avg_usage).powi(2))
            .sum::<f32>() / node_stats.len() as f32;
        
        variance.sqrt()
    }
    
    fn identify_heavily_loaded_nodes(&self, node_stats: &[NodeStatistics]) -> Vec<u8> {
        node_stats.iter()
            .filter(|s| s.bandwidth_utilization > 0.8)
            .map(|s| s.node_id)
            .collect()
    }
    
    fn identify_high_bandwidth_usage(&self, node_stats: &[NodeStatistics]) -> Vec<u8> {
        node_stats.iter()
            .filter(|s| s.bandwidth_utilization > 0.7)
            .map(|s| s.node_id)
            .collect()
    }
    
    fn identify_thermal_hotspots(&self, node_stats: &[NodeStatistics]) -> Vec<u8> {
        node_stats.iter()
            .filter(|s| s.thermal_pressure > 0.8)
            .map(|s| s.node_id)
            .collect()
    }
    
    /// Get NUMA statistics
    pub fn get_statistics(&self) -> NUMAStatistics {
        NUMAStatistics {
            total_allocations: self.numa_stats.total_allocations.load(Ordering::SeqCst),
            local_allocations: self.numa_stats.numa_local_allocations.load(Ordering::SeqCst),
            remote_allocations: self.numa_stats.numa_remote_allocations.load(Ordering::SeqCst),
            migration_count: self.numa_stats.migration_count.load(Ordering::SeqCst),
            bandwidth_utilization: self.numa_stats.bandwidth_utilization.load(Ordering::SeqCst),
            latency_violations: self.numa_stats.latency_violations.load(Ordering::SeqCst),
            memory_pressure: self.numa_stats.memory_pressure,
            node_count: self.numa_nodes.read().len() as u8,
        }
    }
    
    /// Set allocation policy
    pub fn set_allocation_policy(policy: PolicyType) {
        unsafe {
            if let Some(profiler) = NUMA_PROFILER.as_mut() {
                profiler.allocation_policy.store(policy as u32, Ordering::SeqCst);
                info!("NUMA allocation policy set to {:?}", policy);
            }
        }
    }
    
    /// Set migration threshold
    pub fn set_migration_threshold(threshold: u32) {
        unsafe {
            if let Some(profiler) = NUMA_PROFILER.as_mut() {
                profiler.migration_threshold.store(threshold, Ordering::SeqCst);
                info!("NUMA migration threshold set to {}%", threshold);
            }
        }
    }
}

/// NUMA allocation result
#[derive(Debug, Clone)]
pub struct AllocationResult {
    pub address: u64,
    pub node_id: u8,
    pub success: bool,
    pub latency_estimate: u32,
    pub reason: String,
}

/// NUMA statistics summary
#[derive(Debug, Clone)]
pub struct NUMAStatistics {
    pub total_allocations: u64,
    pub local_allocations: u64,
    pub remote_allocations: u64,
    pub migration_count: u64,
    pub bandwidth_utilization: u64,
    pub latency_violations: u64,
    pub memory_pressure: f32,
    pub node_count: u8,
}

/// Global NUMA profiler instance
static mut NUMA_PROFILER: Option<NUMAProfiler> = None;

// Placeholder functions - would integrate with actual system information
fn get_num_numa_nodes() -> u8 {
    // TODO: Query actual NUMA topology
    4 // Simulate 4 NUMA nodes
}

fn get_node_cpus(node_id: u8) -> Vec<u32> {
    // TODO: Query actual CPU topology
    (node_id * 4..(node_id + 1) * 4).collect()
}

fn get_node_latency(node_id: u8) -> u32 {
    // TODO: Query actual NUMA distances
    10 + (node_id as u32 * 5) // Simulated latencies
}

fn policy_from_u32(value: u32) -> PolicyType {
    // Simple mapping - in reality would be more sophisticated
    match value & 0xF {
        0x1 => PolicyType::LOCAL_FIRST,
        0x2 => PolicyType::INTERLEAVE,
        0x4 => PolicyType::BANDWIDTH_AWARE,
        0x8 => PolicyType::THERMAL_AWARE,
        _ => PolicyType::LOCAL_FIRST,
    }
}

fn get_timestamp() -> u64 {
    // TODO: Integrate with actual system time
    0
}