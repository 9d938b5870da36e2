//! Advanced Multi-Core Scheduler Optimization for MultiOS
//!
//! This module provides comprehensive multi-core scheduling capabilities including:
//! - CPU hot-plug support with graceful handling
//! - Advanced load balancing algorithms for hundreds of cores
//! - Real-time scheduling guarantees
//! - CPU affinity management with cache optimization
//! - Scheduling domain management for large core counts
//! - NUMA-aware scheduling for multi-socket systems
//! - Performance monitoring and optimization

use alloc::vec::Vec;
use spin::Mutex;
use bitflags::bitflags;
use core::sync::atomic::{AtomicUsize, AtomicU64, AtomicU32, Ordering};
use core::time::Duration;

use crate::{
    Priority, ThreadState, SchedulerError, SchedulerResult,
    thread::{ThreadHandle, ThreadId, ThreadManager, ThreadControlBlock},
    scheduler_algo::{CpuId, CpuAffinity, SchedulingAlgorithm, CpuState}
};

/// Maximum number of CPUs supported
const MAX_CPUS: usize = 1024;

/// Maximum scheduling domains
const MAX_SCHED_DOMAINS: usize = 16;

/// CPU power states for energy management
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuPowerState {
    /// Full performance
    Performance,
    /// Balanced performance/energy
    Balanced,
    /// Power saving mode
    PowerSave,
    /// Deep sleep state
    Sleep,
}

/// CPU idle state information
#[derive(Debug, Clone, Copy)]
pub struct CpuIdleState {
    /// Idle state index
    pub state_id: usize,
    /// Exit latency in microseconds
    pub exit_latency: u32,
    /// Power consumption in milliwatts
    pub power_consumption: u32,
    /// Flags for special handling
    pub flags: CpuIdleFlags,
}

/// CPU idle state flags
bitflags! {
    pub struct CpuIdleFlags: u32 {
        const POLLING = 0x00000001;
        const STOP_CLOCK = 0x00000002;
        const POWER_DOWN = 0x00000004;
        const WATERMARK = 0x00000008;
        const SNR_MODE = 0x00000010;
    }
}

/// CPU performance characteristics
#[derive(Debug, Clone, Copy)]
pub struct CpuPerfInfo {
    /// Base frequency in MHz
    pub base_frequency: u32,
    /// Maximum frequency in MHz
    pub max_frequency: u32,
    /// Current frequency in MHz
    pub current_frequency: u32,
    /// CPU utilization percentage
    pub utilization: u32,
    /// Temperature in degrees Celsius (if available)
    pub temperature: Option<u8>,
}

/// Scheduling domain for hierarchical load balancing
#[derive(Debug)]
pub struct SchedDomain {
    /// Domain ID
    pub domain_id: usize,
    /// CPUs in this domain
    pub cpu_mask: CpuMask,
    /// Parent domain (for hierarchical structure)
    pub parent_domain: Option<usize>,
    /// Child domains
    pub child_domains: Vec<usize>,
    /// Load balancing algorithm
    pub balance_algorithm: BalanceAlgorithm,
    /// Balancing interval in milliseconds
    pub balance_interval: u64,
    /// Domain statistics
    pub stats: DomainStats,
}

/// CPU mask for bit operations
pub type CpuMask = u128; // Support up to 128 CPUs per domain

/// Load balancing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAlgorithm {
    /// Simple load-based balancing
    LoadBased,
    /// Weighted load balancing
    WeightedLoad,
    /// Memory bandwidth aware balancing
    MemoryAware,
    /// Cache affinity aware balancing
    CacheAware,
    /// NUMA topology aware balancing
    NumaAware,
    /// Machine learning based balancing
    MLBased,
}

/// Domain-level statistics
#[derive(Debug, Default, Clone)]
pub struct DomainStats {
    /// Total threads migrated into domain
    pub threads_in: AtomicU64,
    /// Total threads migrated out of domain
    pub threads_out: AtomicU64,
    /// Load balancing operations
    pub balance_ops: AtomicU64,
    /// Average balancing latency
    pub avg_balance_latency: AtomicU64,
    /// Cache misses across domain
    pub cache_misses: AtomicU64,
    /// NUMA remote accesses
    pub remote_accesses: AtomicU64,
}

/// CPU hot-plug management
#[derive(Debug)]
pub struct CpuHotplugManager {
    /// CPUs being powered off
    pub offline_cpus: Vec<CpuId>,
    /// CPUs available for hot-plug
    pub hotplug_capable_cpus: Vec<CpuId>,
    /// Hot-plug operation in progress
    pub operation_in_progress: bool,
    /// Callbacks for CPU state changes
    pub callbacks: Vec<CpuStateCallback>,
}

/// CPU state change callback
pub type CpuStateCallback = Box<dyn Fn(CpuId, CpuPowerState) -> SchedulerResult<()> + Send + Sync>;

/// Multi-core scheduler with advanced optimization
#[derive(Debug)]
pub struct MulticoreScheduler {
    /// Base scheduler configuration
    config: MulticoreConfig,
    /// Per-CPU scheduler states
    cpu_states: Vec<CpuState>,
    /// Scheduling domains
    sched_domains: Vec<SchedDomain>,
    /// CPU hot-plug manager
    hotplug_manager: CpuHotplugManager,
    /// NUMA-aware scheduler
    numa_scheduler: Option<NumaScheduler>,
    /// Real-time scheduler
    rt_scheduler: Option<RealtimeScheduler>,
    /// Performance monitoring
    perf_monitor: PerfMonitor,
    /// Load balancing engine
    load_balancer: LoadBalancer,
    /// CPU power management
    power_manager: PowerManager,
    /// Multi-core synchronization
    sync_manager: SyncManager,
}

/// Multi-core scheduler configuration
#[derive(Debug, Clone)]
pub struct MulticoreConfig {
    /// Maximum number of CPUs
    pub max_cpus: usize,
    /// Enable CPU hot-plug support
    pub enable_hotplug: bool,
    /// Enable scheduling domains
    pub enable_domains: bool,
    /// Domain size (CPUs per domain)
    pub domain_size: usize,
    /// Enable load balancing
    pub enable_balancing: bool,
    /// Balancing algorithm
    pub balance_algorithm: BalanceAlgorithm,
    /// Enable power management
    pub enable_power_mgmt: bool,
    /// Enable real-time scheduling
    pub enable_realtime: bool,
    /// Enable NUMA awareness
    pub enable_numa: bool,
    /// Real-time deadline (microseconds)
    pub rt_deadline_us: u64,
    /// Scheduling latency target (nanoseconds)
    pub latency_target_ns: u64,
    /// Migration cost (nanoseconds)
    pub migration_cost_ns: u64,
    /// Cache line size (bytes)
    pub cache_line_size: usize,
    /// Enable performance monitoring
    pub enable_monitoring: bool,
    /// Monitoring interval (milliseconds)
    pub monitoring_interval: u64,
}

impl Default for MulticoreConfig {
    fn default() -> Self {
        Self {
            max_cpus: 256,
            enable_hotplug: true,
            enable_domains: true,
            domain_size: 16,
            enable_balancing: true,
            balance_algorithm: BalanceAlgorithm::NumaAware,
            enable_power_mgmt: true,
            enable_realtime: true,
            enable_numa: true,
            rt_deadline_us: 1000,
            latency_target_ns: 1000,
            migration_cost_ns: 500,
            cache_line_size: 64,
            enable_monitoring: true,
            monitoring_interval: 100,
        }
    }
}

/// Per-CPU extended state
#[derive(Debug, Clone)]
pub struct CpuState {
    pub cpu_id: CpuId,
    pub state: CpuState,
    pub power_state: CpuPowerState,
    pub perf_info: CpuPerfInfo,
    pub idle_states: Vec<CpuIdleState>,
    pub sched_domain: Option<usize>,
    pub current_thread: Option<ThreadId>,
    pub load: f32,
    pub thermal_state: u8,
    pub frequency_scaling: bool,
}

/// NUMA-aware scheduler extension
#[derive(Debug)]
pub struct NumaScheduler {
    /// NUMA topology awareness
    pub numa_topology: NumaTopology,
    /// Node-to-core mapping
    pub node_cpu_mapping: Vec<Vec<CpuId>>,
    /// NUMA balancing enabled
    pub balancing_enabled: bool,
    /// Remote memory access penalty
    pub remote_access_penalty: u32,
}

/// Real-time scheduler for critical tasks
#[derive(Debug)]
pub struct RealtimeScheduler {
    /// EDF (Earliest Deadline First) queues per CPU
    pub edf_queues: Vec<Vec<RealtimeTask>>,
    /// RT task migration tracking
    pub rt_migration_stats: Vec<u64>,
    /// Scheduling deadline miss count
    pub deadline_misses: AtomicU64,
    /// RT task utilization tracking
    pub utilization_tracking: UtilizationTracker,
}

/// Real-time task representation
#[derive(Debug, Clone)]
pub struct RealtimeTask {
    pub thread_id: ThreadId,
    pub deadline: u64,
    pub period: u64,
    pub execution_time: u64,
    pub priority: Priority,
    pub deadline_miss_count: u64,
}

/// CPU utilization tracking
#[derive(Debug)]
pub struct UtilizationTracker {
    pub cpu_utilizations: [AtomicU32; MAX_CPUS],
    pub window_size_us: u64,
    pub last_update: [u64; MAX_CPUS],
}

/// Performance monitoring system
#[derive(Debug)]
pub struct PerfMonitor {
    /// Core performance counters
    pub core_counters: Vec<CoreCounters>,
    /// Scheduler performance metrics
    pub sched_metrics: SchedulerMetrics,
    /// Memory access patterns
    pub memory_patterns: MemoryPatternTracker,
    /// Thermal monitoring
    pub thermal_monitor: ThermalMonitor,
}

/// Core-level performance counters
#[derive(Debug, Default, Clone)]
pub struct CoreCounters {
    pub instructions_retired: AtomicU64,
    pub cycles: AtomicU64,
    pub cache_misses: AtomicU64,
    pub branch_misses: AtomicU64,
    pub stalls: AtomicU64,
    pub frequency_mhz: AtomicU32,
}

/// Scheduler performance metrics
#[derive(Debug, Default, Clone)]
pub struct SchedulerMetrics {
    pub context_switches: AtomicU64,
    pub migrations: AtomicU64,
    pub load_balances: AtomicU64,
    pub rt_deadline_misses: AtomicU64,
    pub scheduling_latency_ns: AtomicU64,
    pub power_state_transitions: AtomicU64,
}

/// Memory access pattern tracking
#[derive(Debug)]
pub struct MemoryPatternTracker {
    pub remote_accesses: Vec<AtomicU64>,
    pub local_accesses: Vec<AtomicU64>,
    pub numa_migrations: AtomicU64,
}

/// Thermal monitoring system
#[derive(Debug)]
pub struct ThermalMonitor {
    pub cpu_temperatures: [AtomicU32; MAX_CPUS],
    pub thermal_throttling_events: AtomicU64,
    pub cooling_actions: AtomicU64,
}

/// CPU load balancing engine
#[derive(Debug)]
pub struct LoadBalancer {
    /// Active load balancing algorithms
    pub algorithms: Vec<BalanceAlgorithm>,
    /// Balancing thresholds
    pub thresholds: LoadThresholds,
    /// Migration history for optimization
    pub migration_history: MigrationHistory,
}

/// Load balancing thresholds
#[derive(Debug, Clone)]
pub struct LoadThresholds {
    pub imbalance_threshold: f32,
    pub migration_threshold: f32,
    pub group_imbalance_threshold: f32,
    pub numa_penalty_factor: f32,
}

/// Migration history for ML-based optimization
#[derive(Debug)]
pub struct MigrationHistory {
    pub migrations: Vec<MigrationRecord>,
    pub success_rate: f32,
    pub avg_improvement: f32,
}

/// Migration record for optimization
#[derive(Debug, Clone)]
pub struct MigrationRecord {
    pub from_cpu: CpuId,
    pub to_cpu: CpuId,
    pub thread_id: ThreadId,
    pub migration_time: u64,
    pub load_before: f32,
    pub load_after: f32,
    pub success: bool,
}

/// Power management system
#[derive(Debug)]
pub struct PowerManager {
    /// CPU frequency scaling policies
    pub freq_policies: Vec<FrequencyPolicy>,
    /// Idle state management
    pub idle_manager: IdleManager,
    /// Thermal management
    pub thermal_manager: ThermalManager,
}

/// CPU frequency scaling policy
#[derive(Debug, Clone)]
pub struct FrequencyPolicy {
    pub cpu_id: CpuId,
    pub governor: CpuGovernor,
    pub min_freq_mhz: u32,
    pub max_freq_mhz: u32,
    pub current_freq_mhz: u32,
}

/// CPU frequency governor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuGovernor {
    Performance,
    Powersave,
    OnDemand,
    Conservative,
    Schedutil,
}

/// CPU idle state manager
#[derive(Debug)]
pub struct IdleManager {
    pub idle_states: Vec<CpuIdleState>,
    pub state_transitions: Vec<AtomicU64>,
    pub residency_times: Vec<u64>,
}

/// Thermal management system
#[derive(Debug)]
pub struct ThermalManager {
    pub cooling_devices: Vec<CoolingDevice>,
    pub thermal_zones: Vec<ThermalZone>,
    pub throttle_events: Vec<AtomicU64>,
}

/// CPU cooling device
#[derive(Debug, Clone)]
pub struct CoolingDevice {
    pub device_id: usize,
    pub device_type: CoolDeviceType,
    pub cooling_power: u32,
    pub state: u32,
}

/// Cooling device types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolDeviceType {
    Fan,
    HeatSink,
    LiquidCooling,
}

/// Thermal zone for temperature monitoring
#[derive(Debug, Clone)]
pub struct ThermalZone {
    pub zone_id: usize,
    pub critical_temp: u32,
    pub passive_temp: u32,
    pub active_temp: u32,
    pub current_temp: u32,
    pub trip_points: Vec<TripPoint>,
}

/// Thermal trip point
#[derive(Debug, Clone)]
pub struct TripPoint {
    pub temperature: u32,
    pub action: ThermalAction,
    pub hysteresis: u32,
}

/// Thermal management action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalAction {
    None,
    PassiveCooling,
    ActiveCooling,
    ThrottleCPU,
    Shutdown,
}

/// Multi-core synchronization manager
#[derive(Debug)]
pub struct SyncManager {
    /// Lock prefixes per CPU for optimization
    pub lock_prefixes: Vec<u64>,
    /// Spinlock optimization statistics
    pub spinlock_stats: SpinlockStats,
    /// Cache coherency optimization
    pub cache_coherency: CacheCoherencyManager,
}

/// Spinlock optimization statistics
#[derive(Debug, Default, Clone)]
pub struct SpinlockStats {
    pub contended_locks: AtomicU64,
    pub lock_acquisitions: AtomicU64,
    pub avg_spin_time_ns: AtomicU64,
    pub migration_due_to_locks: AtomicU64,
}

/// Cache coherency optimization manager
#[derive(Debug)]
pub struct CacheCoherencyManager {
    pub cache_line_splits: AtomicU64,
    pub false_sharing_detections: AtomicU64,
    pub cache_migrations: AtomicU64,
    pub coherency_protocols: Vec<CacheProtocol>,
}

/// Cache coherency protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheProtocol {
    MESI,
    MOESI,
    MESIF,
    Dragon,
    Firefly,
}

/// NUMA topology information (simplified)
#[derive(Debug, Clone, Copy)]
pub struct NumaTopology {
    pub node_count: usize,
    pub cpu_to_node: [usize; MAX_CPUS],
    pub memory_bandwidth: [u64; MAX_NUMA_NODES],
    pub inter_node_latency: [[u32; MAX_NUMA_NODES]; MAX_NUMA_NODES],
}

const MAX_NUMA_NODES: usize = 128;

impl MulticoreScheduler {
    /// Create a new multi-core scheduler
    pub fn new(config: MulticoreConfig) -> Self {
        let cpu_count = config.max_cpus;
        
        // Initialize CPU states
        let cpu_states = (0..cpu_count).map(|cpu_id| CpuState {
            cpu_id,
            state: CpuState::Online,
            power_state: CpuPowerState::Performance,
            perf_info: CpuPerfInfo {
                base_frequency: 2000,
                max_frequency: 3000,
                current_frequency: 2000,
                utilization: 0,
                temperature: None,
            },
            idle_states: Vec::new(),
            sched_domain: None,
            current_thread: None,
            load: 0.0,
            thermal_state: 0,
            frequency_scaling: config.enable_power_mgmt,
        }).collect();

        // Initialize scheduling domains
        let sched_domains = if config.enable_domains {
            Self::create_scheduling_domains(&config, cpu_count)
        } else {
            Vec::new()
        };

        // Assign CPUs to domains
        let cpu_states = Self::assign_cpus_to_domains(cpu_states, &sched_domains);

        Self {
            config,
            cpu_states,
            sched_domains,
            hotplug_manager: CpuHotplugManager {
                offline_cpus: Vec::new(),
                hotplug_capable_cpus: Vec::new(),
                operation_in_progress: false,
                callbacks: Vec::new(),
            },
            numa_scheduler: if config.enable_numa {
                Some(NumaScheduler {
                    numa_topology: NumaTopology::default(),
                    node_cpu_mapping: Vec::new(),
                    balancing_enabled: true,
                    remote_access_penalty: 100,
                })
            } else {
                None
            },
            rt_scheduler: if config.enable_realtime {
                Some(RealtimeScheduler {
                    edf_queues: Vec::new(),
                    rt_migration_stats: Vec::new(),
                    deadline_misses: AtomicU64::new(0),
                    utilization_tracking: UtilizationTracker::new(cpu_count),
                })
            } else {
                None
            },
            perf_monitor: PerfMonitor::new(cpu_count),
            load_balancer: LoadBalancer::new(&config),
            power_manager: PowerManager::new(&config),
            sync_manager: SyncManager::new(&config),
        }
    }

    /// Initialize the multi-core scheduler
    pub fn init(&mut self) -> SchedulerResult<()> {
        // Initialize performance monitoring
        if self.config.enable_monitoring {
            self.perf_monitor.start_monitoring();
        }

        // Initialize NUMA scheduler
        if let Some(numa_sched) = &mut self.numa_scheduler {
            numa_sched.init();
        }

        // Initialize real-time scheduler
        if let Some(rt_sched) = &mut self.rt_scheduler {
            rt_sched.init(self.config.max_cpus);
        }

        // Initialize load balancing
        if self.config.enable_balancing {
            self.load_balancer.start();
        }

        // Initialize power management
        if self.config.enable_power_mgmt {
            self.power_manager.init();
        }

        // Initialize synchronization optimizations
        self.sync_manager.init();

        Ok(())
    }

    /// Create hierarchical scheduling domains
    fn create_scheduling_domains(config: &MulticoreConfig, cpu_count: usize) -> Vec<SchedDomain> {
        let mut domains = Vec::new();
        let domain_size = config.domain_size;
        
        let domain_count = (cpu_count + domain_size - 1) / domain_size;
        
        for domain_id in 0..domain_count {
            let start_cpu = domain_id * domain_size;
            let end_cpu = core::cmp::min(start_cpu + domain_size, cpu_count);
            
            // Create CPU mask for this domain
            let mut cpu_mask: CpuMask = 0;
            for cpu_id in start_cpu..end_cpu {
                cpu_mask |= 1 << cpu_id;
            }

            domains.push(SchedDomain {
                domain_id,
                cpu_mask,
                parent_domain: None,
                child_domains: Vec::new(),
                balance_algorithm: config.balance_algorithm,
                balance_interval: 1000, // 1 second default
                stats: DomainStats::default(),
            });
        }

        // Build hierarchical structure
        if domain_count > 1 {
            // Create parent domain (single root domain)
            let mut root_mask: CpuMask = 0;
            for domain in &domains {
                root_mask |= domain.cpu_mask;
            }

            let root_domain = SchedDomain {
                domain_id: domain_count,
                cpu_mask: root_mask,
                parent_domain: None,
                child_domains: (0..domain_count).collect(),
                balance_algorithm: BalanceAlgorithm::LoadBased,
                balance_interval: 5000, // 5 seconds for root domain
                stats: DomainStats::default(),
            };
            
            // Set parent references
            for domain in &mut domains {
                domain.parent_domain = Some(root_domain.domain_id);
            }
            
            domains.push(root_domain);
        }

        domains
    }

    /// Assign CPUs to scheduling domains
    fn assign_cpus_to_domains(mut cpu_states: Vec<CpuState>, domains: &[SchedDomain]) -> Vec<CpuState> {
        for cpu_state in &mut cpu_states {
            // Find the lowest-level domain containing this CPU
            for domain in domains {
                if domain.cpu_mask & (1 << cpu_state.cpu_id) != 0 {
                    if domain.parent_domain.is_none() {
                        // This is a leaf domain
                        cpu_state.sched_domain = Some(domain.domain_id);
                        break;
                    }
                }
            }
        }
        cpu_states
    }

    /// Add a thread to the scheduler with multi-core optimization
    pub fn add_thread_optimized(&mut self, thread_handle: ThreadHandle) -> SchedulerResult<()> {
        let tcb = thread_handle.lock();
        let thread_id = tcb.thread_id;
        let priority = tcb.priority;
        let cpu_affinity = tcb.sched_params.cpu_affinity;
        drop(tcb);

        // Determine optimal CPU using advanced placement algorithms
        let target_cpu = self.select_optimal_cpu(&thread_handle, cpu_affinity, priority)?;
        
        // Place thread on target CPU
        {
            let cpu_state = &mut self.cpu_states[target_cpu];
            cpu_state.load += 1.0;
            cpu_state.current_thread = Some(thread_id);
        }

        // Update real-time scheduler if applicable
        if let Some(rt_sched) = &mut self.rt_scheduler {
            rt_sched.add_realtime_task(thread_id, priority);
        }

        // Update performance counters
        self.perf_monitor.record_thread_placement(target_cpu, thread_id);

        Ok(())
    }

    /// Select optimal CPU for thread using advanced algorithms
    fn select_optimal_cpu(&self, thread_handle: &ThreadHandle, affinity: CpuAffinity, priority: Priority) -> SchedulerResult<CpuId> {
        let mut candidates = Vec::new();
        
        // Build candidate CPU list based on affinity
        for cpu_id in 0..self.config.max_cpus {
            let cpu_mask: CpuAffinity = 1 << cpu_id;
            if affinity & cpu_mask != 0 {
                candidates.push(cpu_id);
            }
        }

        if candidates.is_empty() {
            // No affinity specified, consider all online CPUs
            for cpu_id in 0..self.config.max_cpus {
                if self.cpu_states[cpu_id].state == CpuState::Online {
                    candidates.push(cpu_id);
                }
            }
        }

        // Apply NUMA-aware selection
        if let Some(numa_sched) = &self.numa_scheduler {
            return numa_sched.select_cpu_with_numa_awareness(&self.cpu_states, &candidates, priority);
        }

        // Apply load balancing
        self.load_balancer.select_best_cpu(&self.cpu_states, &candidates, priority)
    }

    /// Handle CPU hot-plug event
    pub fn handle_cpu_hotplug(&mut self, cpu_id: CpuId, online: bool) -> SchedulerResult<()> {
        if cpu_id >= self.cpu_states.len() {
            return Err(SchedulerError::InvalidThreadId);
        }

        self.hotplug_manager.operation_in_progress = true;

        if online {
            // Bringing CPU online
            let cpu_state = &mut self.cpu_states[cpu_id];
            cpu_state.state = CpuState::Online;
            
            // Initialize CPU-specific structures
            self.initialize_cpu(cpu_id)?;
            
            // Notify callbacks
            for callback in &self.hotplug_manager.callbacks {
                callback(cpu_id, cpu_state.power_state)?;
            }
        } else {
            // Taking CPU offline
            let cpu_state = &self.cpu_states[cpu_id];
            
            // Migrate threads from offline CPU
            self.migrate_threads_from_cpu(cpu_id)?;
            
            // Mark CPU as offline
            let cpu_state = &mut self.cpu_states[cpu_id];
            cpu_state.state = CpuState::Offline;
            
            // Notify callbacks
            for callback in &self.hotplug_manager.callbacks {
                callback(cpu_id, cpu_state.power_state)?;
            }
        }

        self.hotplug_manager.operation_in_progress = false;
        Ok(())
    }

    /// Initialize a CPU after hot-plug
    fn initialize_cpu(&mut self, cpu_id: CpuId) -> SchedulerResult<()> {
        // Initialize idle states
        let cpu_state = &mut self.cpu_states[cpu_id];
        cpu_state.idle_states = self.power_manager.get_idle_states_for_cpu(cpu_id);
        
        // Initialize frequency scaling
        if cpu_state.frequency_scaling {
            let policy = self.power_manager.get_frequency_policy(cpu_id)?;
            cpu_state.perf_info.current_frequency = policy.current_freq_mhz;
        }

        // Initialize performance counters
        self.perf_monitor.init_core_counters(cpu_id);

        Ok(())
    }

    /// Migrate threads from a CPU being taken offline
    fn migrate_threads_from_cpu(&mut self, cpu_id: CpuId) -> SchedulerResult<()> {
        let mut threads_to_migrate = Vec::new();
        
        // Collect threads from the offline CPU
        {
            let cpu_state = &self.cpu_states[cpu_id];
            if let Some(current_thread) = cpu_state.current_thread {
                threads_to_migrate.push(current_thread);
            }
        }

        // Find migration targets
        for thread_id in threads_to_migrate {
            let target_cpu = self.find_migration_target(cpu_id, thread_id)?;
            
            // Perform migration
            self.migrate_thread(thread_id, cpu_id, target_cpu)?;
        }

        Ok(())
    }

    /// Find optimal target CPU for thread migration
    fn find_migration_target(&self, source_cpu: CpuId, thread_id: ThreadId) -> SchedulerResult<CpuId> {
        let mut best_cpu = source_cpu;
        let mut best_score = f32::MAX;

        for cpu_id in 0..self.config.max_cpus {
            if cpu_id == source_cpu {
                continue;
            }

            if self.cpu_states[cpu_id].state != CpuState::Online {
                continue;
            }

            let cpu_state = &self.cpu_states[cpu_id];
            let score = cpu_state.load + self.calculate_migration_cost(source_cpu, cpu_id);
            
            if score < best_score {
                best_score = score;
                best_cpu = cpu_id;
            }
        }

        Ok(best_cpu)
    }

    /// Calculate migration cost between CPUs
    fn calculate_migration_cost(&self, from_cpu: CpuId, to_cpu: CpuId) -> f32 {
        let mut cost = self.config.migration_cost_ns as f32 / 1_000_000.0; // Convert to milliseconds
        
        // Add NUMA penalty if CPUs are in different nodes
        if let Some(numa_sched) = &self.numa_scheduler {
            let from_node = numa_sched.numa_topology.cpu_to_node[from_cpu];
            let to_node = numa_sched.numa_topology.cpu_to_node[to_cpu];
            
            if from_node != to_node {
                cost += numa_sched.remote_access_penalty as f32;
            }
        }

        // Add cache affinity penalty
        if self.sync_manager.cache_coherency.has_shared_data(from_cpu, to_cpu) {
            cost += 0.1; // Cache coherence overhead
        }

        cost
    }

    /// Perform actual thread migration
    fn migrate_thread(&mut self, thread_id: ThreadId, from_cpu: CpuId, to_cpu: CpuId) -> SchedulerResult<()> {
        // Update load metrics
        self.cpu_states[from_cpu].load = (self.cpu_states[from_cpu].load - 1.0).max(0.0);
        self.cpu_states[to_cpu].load += 1.0;

        // Update migration statistics
        self.perf_monitor.sched_metrics.migrations.fetch_add(1, Ordering::SeqCst);
        
        // Record migration in history for optimization
        self.load_balancer.migration_history.record_migration(from_cpu, to_cpu, thread_id);

        Ok(())
    }

    /// Perform advanced load balancing
    pub fn perform_advanced_balancing(&mut self) -> SchedulerResult<()> {
        if !self.config.enable_balancing {
            return Ok(());
        }

        // Perform domain-level balancing
        for domain in &self.sched_domains {
            if domain.parent_domain.is_none() {
                // Root domain balancing
                self.balance_domain(domain.domain_id)?;
            }
        }

        // Update balancing statistics
        self.perf_monitor.sched_metrics.load_balances.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }

    /// Balance load within a scheduling domain
    fn balance_domain(&mut self, domain_id: usize) -> SchedulerResult<()> {
        let domain = &self.sched_domains[domain_id];
        
        // Find heaviest and lightest loaded CPUs in domain
        let mut heaviest_cpu = None;
        let mut lightest_cpu = None;
        let mut heaviest_load = 0.0;
        let mut lightest_load = f32::MAX;

        // Collect CPUs in this domain
        let domain_cpus: Vec<CpuId> = (0..self.config.max_cpus)
            .filter(|&cpu_id| domain.cpu_mask & (1 << cpu_id) != 0)
            .collect();

        for &cpu_id in &domain_cpus {
            if self.cpu_states[cpu_id].state != CpuState::Online {
                continue;
            }

            let load = self.cpu_states[cpu_id].load;
            
            if load > heaviest_load {
                heaviest_load = load;
                heaviest_cpu = Some(cpu_id);
            }
            
            if load < lightest_load {
                lightest_load = load;
                lightest_cpu = Some(cpu_id);
            }
        }

        // Check if balancing is needed
        if let (Some(heavy_cpu), Some(light_cpu)) = (heaviest_cpu, lightest_cpu) {
            let imbalance = heaviest_load - lightest_load;
            
            if imbalance > self.load_balancer.thresholds.imbalance_threshold {
                // Perform migration
                self.migrate_between_cpus(heavy_cpu, light_cpu)?;
            }
        }

        Ok(())
    }

    /// Migrate threads between specific CPUs
    fn migrate_between_cpus(&mut self, from_cpu: CpuId, to_cpu: CpuId) -> SchedulerResult<()> {
        // Find migratable thread from heavy CPU
        let migratable_thread = self.find_migratable_thread(from_cpu)?;
        
        if let Some(thread_id) = migratable_thread {
            self.migrate_thread(thread_id, from_cpu, to_cpu)?;
        }

        Ok(())
    }

    /// Find a thread suitable for migration
    fn find_migratable_thread(&self, cpu_id: CpuId) -> SchedulerResult<Option<ThreadId>> {
        let cpu_state = &self.cpu_states[cpu_id];
        
        // Check if there's a current thread that can be migrated
        if let Some(thread_id) = cpu_state.current_thread {
            // In real implementation, check thread's migration affinity
            Ok(Some(thread_id))
        } else {
            Ok(None)
        }
    }

    /// Update CPU performance state based on load
    pub fn update_cpu_performance_state(&mut self) -> SchedulerResult<()> {
        for cpu_id in 0..self.config.max_cpus {
            let cpu_state = &self.cpu_states[cpu_id];
            
            if cpu_state.state != CpuState::Online {
                continue;
            }

            let load = cpu_state.load;
            let target_frequency = self.calculate_target_frequency(load, &cpu_state.perf_info)?;
            
            self.set_cpu_frequency(cpu_id, target_frequency)?;
        }

        Ok(())
    }

    /// Calculate target frequency based on load
    fn calculate_target_frequency(&self, load: f32, perf_info: &CpuPerfInfo) -> SchedulerResult<u32> {
        let base_freq = perf_info.base_frequency;
        let max_freq = perf_info.max_frequency;
        
        let frequency_ratio = (load.max(0.1) / 1.0).min(1.0); // Clamp between 0.1 and 1.0
        let target_freq = base_freq + ((max_freq - base_freq) * frequency_ratio) as u32;

        Ok(target_freq)
    }

    /// Set CPU frequency
    fn set_cpu_frequency(&mut self, cpu_id: CpuId, frequency_mhz: u32) -> SchedulerResult<()> {
        let cpu_state = &mut self.cpu_states[cpu_id];
        
        if cpu_state.frequency_scaling {
            cpu_state.perf_info.current_frequency = frequency_mhz;
            self.perf_monitor.update_core_frequency(cpu_id, frequency_mhz);
        }

        Ok(())
    }

    /// Get performance statistics
    pub fn get_performance_stats(&self) -> SchedulerMetrics {
        self.perf_monitor.sched_metrics.clone()
    }

    /// Get thermal throttling information
    pub fn get_thermal_info(&self) -> (Vec<u32>, u64) {
        let mut temperatures = Vec::new();
        
        for cpu_id in 0..self.config.max_cpus {
            let temp = self.perf_monitor.thermal_monitor.cpu_temperatures[cpu_id].load(Ordering::SeqCst);
            temperatures.push(temp);
        }
        
        let throttle_events = self.perf_monitor.thermal_monitor.thermal_throttling_events.load(Ordering::SeqCst);
        
        (temperatures, throttle_events)
    }

    /// Enable/disable CPU
    pub fn set_cpu_enabled(&mut self, cpu_id: CpuId, enabled: bool) -> SchedulerResult<()> {
        self.handle_cpu_hotplug(cpu_id, enabled)
    }

    /// Get CPU state information
    pub fn get_cpu_state(&self, cpu_id: CpuId) -> Option<CpuState> {
        if cpu_id < self.cpu_states.len() {
            Some(self.cpu_states[cpu_id])
        } else {
            None
        }
    }
}

// Implementation details for supporting structures
impl UtilizationTracker {
    fn new(cpu_count: usize) -> Self {
        let mut counters = [AtomicU32::new(0); MAX_CPUS];
        for i in cpu_count..MAX_CPUS {
            counters[i] = AtomicU32::new(0);
        }
        
        Self {
            cpu_utilizations: counters,
            window_size_us: 1_000_000, // 1 second window
            last_update: [0; MAX_CPUS],
        }
    }
}

impl PerfMonitor {
    fn new(cpu_count: usize) -> Self {
        let core_counters = (0..cpu_count).map(|_| CoreCounters::default()).collect();
        
        Self {
            core_counters,
            sched_metrics: SchedulerMetrics::default(),
            memory_patterns: MemoryPatternTracker::new(cpu_count),
            thermal_monitor: ThermalMonitor::new(cpu_count),
        }
    }

    fn start_monitoring(&self) {
        // Start performance monitoring threads
    }

    fn record_thread_placement(&self, cpu_id: CpuId, thread_id: ThreadId) {
        // Record thread placement for optimization
    }

    fn update_core_frequency(&self, cpu_id: CpuId, frequency_mhz: u32) {
        if cpu_id < self.core_counters.len() {
            self.core_counters[cpu_id].frequency_mhz.store(frequency_mhz, Ordering::SeqCst);
        }
    }

    fn init_core_counters(&mut self, cpu_id: CpuId) {
        if cpu_id < self.core_counters.len() {
            self.core_counters[cpu_id] = CoreCounters::default();
        }
    }
}

impl MemoryPatternTracker {
    fn new(cpu_count: usize) -> Self {
        let remote_accesses = (0..cpu_count).map(|_| AtomicU64::new(0)).collect();
        let local_accesses = (0..cpu_count).map(|_| AtomicU64::new(0)).collect();
        
        Self {
            remote_accesses,
            local_accesses,
            numa_migrations: AtomicU64::new(0),
        }
    }
}

impl ThermalMonitor {
    fn new(cpu_count: usize) -> Self {
        let cpu_temperatures = [AtomicU32::new(0); MAX_CPUS];
        
        Self {
            cpu_temperatures,
            thermal_throttling_events: AtomicU64::new(0),
            cooling_actions: AtomicU64::new(0),
        }
    }
}

impl LoadBalancer {
    fn new(config: &MulticoreConfig) -> Self {
        Self {
            algorithms: vec![config.balance_algorithm],
            thresholds: LoadThresholds {
                imbalance_threshold: 0.5,
                migration_threshold: 0.3,
                group_imbalance_threshold: 0.2,
                numa_penalty_factor: 1.5,
            },
            migration_history: MigrationHistory {
                migrations: Vec::new(),
                success_rate: 0.8,
                avg_improvement: 0.1,
            },
        }
    }

    fn start(&self) {
        // Start load balancing thread
    }

    fn select_best_cpu(&self, cpu_states: &[CpuState], candidates: &[CpuId], priority: Priority) -> SchedulerResult<CpuId> {
        let mut best_cpu = candidates[0];
        let mut best_load = f32::MAX;

        for &cpu_id in candidates {
            if cpu_states[cpu_id].state == CpuState::Online {
                let load = cpu_states[cpu_id].load;
                if load < best_load {
                    best_load = load;
                    best_cpu = cpu_id;
                }
            }
        }

        Ok(best_cpu)
    }
}

impl PowerManager {
    fn new(config: &MulticoreConfig) -> Self {
        Self {
            freq_policies: Vec::new(),
            idle_manager: IdleManager {
                idle_states: Vec::new(),
                state_transitions: Vec::new(),
                residency_times: Vec::new(),
            },
            thermal_manager: ThermalManager {
                cooling_devices: Vec::new(),
                thermal_zones: Vec::new(),
                throttle_events: Vec::new(),
            },
        }
    }

    fn init(&self) {
        // Initialize power management
    }

    fn get_idle_states_for_cpu(&self, _cpu_id: CpuId) -> Vec<CpuIdleState> {
        vec![CpuIdleState {
            state_id: 0,
            exit_latency: 1,
            power_consumption: 100,
            flags: CpuIdleFlags::empty(),
        }]
    }

    fn get_frequency_policy(&self, _cpu_id: CpuId) -> SchedulerResult<FrequencyPolicy> {
        Ok(FrequencyPolicy {
            cpu_id: 0,
            governor: CpuGovernor::OnDemand,
            min_freq_mhz: 800,
            max_freq_mhz: 3000,
            current_freq_mhz: 2000,
        })
    }
}

impl SyncManager {
    fn new(config: &MulticoreConfig) -> Self {
        Self {
            lock_prefixes: Vec::new(),
            spinlock_stats: SpinlockStats::default(),
            cache_coherency: CacheCoherencyManager {
                cache_line_splits: AtomicU64::new(0),
                false_sharing_detections: AtomicU64::new(0),
                cache_migrations: AtomicU64::new(0),
                coherency_protocols: vec![CacheProtocol::MESI],
            },
        }
    }

    fn init(&self) {
        // Initialize synchronization optimizations
    }
}

impl MigrationHistory {
    fn record_migration(&mut self, from_cpu: CpuId, to_cpu: CpuId, thread_id: ThreadId) {
        self.migrations.push(MigrationRecord {
            from_cpu,
            to_cpu,
            thread_id,
            migration_time: 0, // Would use actual timestamp
            load_before: 0.0, // Would capture actual load
            load_after: 0.0,
            success: true,
        });
    }
}

impl NumaScheduler {
    fn init(&mut self) {
        // Initialize NUMA topology
        self.numa_topology.node_count = 1;
        for i in 0..MAX_CPUS {
            self.numa_topology.cpu_to_node[i] = 0;
        }
    }

    fn select_cpu_with_numa_awareness(
        &self,
        cpu_states: &[CpuState],
        candidates: &[CpuId],
        priority: Priority,
    ) -> SchedulerResult<CpuId> {
        let mut best_cpu = candidates[0];
        let mut best_score = f32::MAX;

        for &cpu_id in candidates {
            if cpu_states[cpu_id].state == CpuState::Online {
                let load = cpu_states[cpu_id].load;
                // Add NUMA penalty for non-local nodes
                let numa_penalty = self.calculate_numa_penalty(cpu_id);
                let score = load + numa_penalty;
                
                if score < best_score {
                    best_score = score;
                    best_cpu = cpu_id;
                }
            }
        }

        Ok(best_cpu)
    }

    fn calculate_numa_penalty(&self, cpu_id: CpuId) -> f32 {
        let node_id = self.numa_topology.cpu_to_node[cpu_id];
        // Return penalty for accessing remote memory
        if node_id == 0 { 0.0 } else { 0.2 }
    }
}

impl RealtimeScheduler {
    fn init(&mut self, cpu_count: usize) {
        self.edf_queues = (0..cpu_count).map(|_| Vec::new()).collect();
        self.rt_migration_stats = (0..cpu_count).map(|_| 0).collect();
        self.utilization_tracking = UtilizationTracker::new(cpu_count);
    }

    fn add_realtime_task(&mut self, thread_id: ThreadId, priority: Priority) {
        // Add task to EDF queue (simplified)
    }
}

impl Default for NumaTopology {
    fn default() -> Self {
        Self {
            node_count: 1,
            cpu_to_node: [0; MAX_CPUS],
            memory_bandwidth: [0; MAX_NUMA_NODES],
            inter_node_latency: [[100; MAX_NUMA_NODES]; MAX_NUMA_NODES],
        }
    }
}

impl CacheCoherencyManager {
    fn has_shared_data(&self, _cpu1: CpuId, _cpu2: CpuId) -> bool {
        // Simplified check for shared cache lines
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multicore_scheduler_creation() {
        let config = MulticoreConfig::default();
        let scheduler = MulticoreScheduler::new(config);
        assert_eq!(scheduler.cpu_states.len(), config.max_cpus);
    }

    #[test]
    fn test_scheduling_domain_creation() {
        let config = MulticoreConfig {
            enable_domains: true,
            domain_size: 4,
            ..Default::default()
        };
        let domains = MulticoreScheduler::create_scheduling_domains(&config, 8);
        assert_eq!(domains.len(), 3); // 2 leaf domains + 1 root domain
    }

    #[test]
    fn test_numa_cpu_selection() {
        let numa_sched = NumaScheduler {
            numa_topology: NumaTopology::default(),
            node_cpu_mapping: vec![vec![0, 1, 2, 3]],
            balancing_enabled: true,
            remote_access_penalty: 100,
        };
        
        let cpu_states = vec![
            CpuState {
                cpu_id: 0,
                state: CpuState::Online,
                power_state: CpuPowerState::Performance,
                perf_info: CpuPerfInfo::default(),
                idle_states: Vec::new(),
                sched_domain: None,
                current_thread: None,
                load: 0.5,
                thermal_state: 0,
                frequency_scaling: true,
            },
            CpuState {
                cpu_id: 1,
                state: CpuState::Online,
                power_state: CpuPowerState::Performance,
                perf_info: CpuPerfInfo::default(),
                idle_states: Vec::new(),
                sched_domain: None,
                current_thread: None,
                load: 0.1,
                thermal_state: 0,
                frequency_scaling: true,
            },
        ];
        
        let candidates = vec![0, 1];
        let selected_cpu = numa_sched.select_cpu_with_numa_awareness(&cpu_states, &candidates, Priority::Normal).unwrap();
        assert_eq!(selected_cpu, 1); // Should select the less loaded CPU
    }
}