//! Stack Usage Profiling
//!
//! This module provides comprehensive stack usage analysis including stack depth tracking,
//! stack frame analysis, stack overflow detection, and optimization recommendations.

use core::sync::atomic::{AtomicU64, AtomicU32, Ordering};
use spin::RwLock;
use log::warn;
use bitflags::bitflags;

/// Stack frame information
#[derive(Debug, Clone)]
pub struct StackFrame {
    pub function_address: u64,
    pub return_address: u64,
    pub frame_size: usize,
    pub local_variables: usize,
    pub parameters: usize,
    pub saved_registers: usize,
    pub timestamp: u64,
    pub thread_id: u32,
    pub call_depth: u32,
}

/// Stack usage snapshot
#[derive(Debug, Clone)]
pub struct StackSnapshot {
    pub thread_id: u32,
    pub current_depth: usize,
    pub peak_depth: usize,
    pub available_space: usize,
    pub used_space: usize,
    pub stack_base: u64,
    pub stack_limit: u64,
    pub timestamp: u64,
    pub overflow_detected: bool,
}

/// Stack analysis statistics
#[derive(Debug, Clone)]
pub struct StackStats {
    pub total_stack_allocations: AtomicU64,
    pub total_stack_deallocations: AtomicU64,
    pub max_depth_reached: AtomicU64,
    pub stack_overflows: AtomicU64,
    pub average_depth: AtomicU64,
    pub depth_variance: AtomicU64,
    pub thread_count: AtomicU32,
    pub total_stack_memory: AtomicU64,
}

/// Stack optimization opportunities
#[derive(Debug, Clone)]
pub struct StackOptimization {
    pub optimization_type: OptimizationType,
    pub description: String,
    pub estimated_savings: usize,
    pub implementation_difficulty: ImplementationDifficulty,
    pub priority: OptimizationPriority,
    pub affected_functions: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationType {
    ReduceFrameSize,
    EliminateTailRecursion,
    ParameterOptimization,
    RegisterOptimization,
    InlineFunctions,
}

#[derive(Debug, Clone)]
pub enum ImplementationDifficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

#[derive(Debug, Clone)]
pub enum OptimizationPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Stack profiling report
#[derive(Debug, Clone)]
pub struct StackProfilingReport {
    pub timestamp: u64,
    pub thread_snapshots: Vec<StackSnapshot>,
    pub frame_analysis: Vec<FunctionStackInfo>,
    pub optimization_opportunities: Vec<StackOptimization>,
    pub overflow_analysis: Vec<StackOverflowEvent>,
    pub stack_heatmap: StackHeatmap,
}

/// Function stack usage information
#[derive(Debug, Clone)]
pub struct FunctionStackInfo {
    pub function_address: u64,
    pub function_name: Option<String>,
    pub average_frame_size: usize,
    pub max_frame_size: usize,
    pub call_count: u64,
    pub total_stack_used: u64,
    pub optimization_potential: f32,
}

/// Stack overflow event
#[derive(Debug, Clone)]
pub struct StackOverflowEvent {
    pub thread_id: u32,
    pub timestamp: u64,
    pub overflow_amount: usize,
    pub function_address: u64,
    pub stack_base: u64,
    pub severity: OverflowSeverity,
}

#[derive(Debug, Clone)]
pub enum OverflowSeverity {
    Warning,
    Critical,
    Fatal,
}

/// Stack visualization heatmap
#[derive(Debug, Clone)]
pub struct StackHeatmap {
    pub depth_levels: Vec<DepthLevel>,
    pub thread_utilization: Vec<ThreadUtilization>,
    pub function_footprint: Vec<FunctionFootprint>,
}

/// Stack depth level information
#[derive(Debug, Clone)]
pub struct DepthLevel {
    pub depth: u32,
    pub function_count: u32,
    pub total_usage: usize,
    pub usage_percentage: f32,
}

/// Thread stack utilization
#[derive(Debug, Clone)]
pub struct ThreadUtilization {
    pub thread_id: u32,
    pub current_usage: usize,
    pub peak_usage: usize,
    pub total_allocations: u64,
    pub efficiency_score: f32,
}

/// Function footprint in stack
#[derive(Debug, Clone)]
pub struct FunctionFootprint {
    pub function_address: u64,
    pub max_depth_reached: u32,
    pub call_frequency: u64,
    pub memory_footprint: usize,
}

bitflags! {
    /// Stack monitoring flags
    pub struct StackFlags: u32 {
        const MONITOR_ALLOCATION = 0b0001;
        const MONITOR_DEALLOCATION = 0b0010;
        const TRACK_CALL_DEPTH = 0b0100;
        const DETECT_OVERFLOW = 0b1000;
        const PROFILE_FRAMES = 0b10000;
        const OPTIMIZATION_HINTS = 0b100000;
    }
}

/// Main stack profiler
pub struct StackProfiler {
    // Thread-specific data
    thread_stacks: RwLock<std::collections::HashMap<u32, ThreadStackData>>,
    stack_stats: StackStats,
    
    // Stack frame analysis
    frame_history: RwLock<Vec<StackFrame>>,
    function_stats: RwLock<std::collections::HashMap<u64, FunctionStackInfo>>,
    
    // Configuration
    stack_size_limit: usize,
    overflow_threshold: usize,
    monitoring_flags: AtomicU32,
    max_history_size: usize,
    
    // Overflow detection
    overflow_events: RwLock<Vec<StackOverflowEvent>>,
    overflow_callback: Option<fn(u32, usize)>,
    
    // Optimization tracking
    optimization_suggestions: RwLock<Vec<StackOptimization>>,
    last_analysis_time: AtomicU64,
    analysis_interval: u64,
}

/// Thread-specific stack data
#[derive(Debug, Clone)]
struct ThreadStackData {
    pub thread_id: u32,
    pub current_depth: usize,
    pub peak_depth: usize,
    pub stack_base: u64,
    pub stack_limit: u64,
    pub frame_history: Vec<StackFrame>,
    pub last_update: u64,
}

impl StackProfiler {
    /// Initialize the stack profiler
    pub fn init() {
        let profiler = StackProfiler {
            thread_stacks: RwLock::new(std::collections::HashMap::new()),
            stack_stats: StackStats {
                total_stack_allocations: AtomicU64::new(0),
                total_stack_deallocations: AtomicU64::new(0),
                max_depth_reached: AtomicU64::new(0),
                stack_overflows: AtomicU64::new(0),
                average_depth: AtomicU64::new(0),
                depth_variance: AtomicU64::new(0),
                thread_count: AtomicU32::new(0),
                total_stack_memory: AtomicU64::new(0),
            },
            frame_history: RwLock::new(Vec::new()),
            function_stats: RwLock::new(std::collections::HashMap::new()),
            stack_size_limit: 1024 * 1024, // 1MB default
            overflow_threshold: 64 * 1024, // 64KB before warning
            monitoring_flags: AtomicU32::new(
                StackFlags::MONITOR_ALLOCATION.bits() |
                StackFlags::MONITOR_DEALLOCATION.bits() |
                StackFlags::TRACK_CALL_DEPTH.bits() |
                StackFlags::DETECT_OVERFLOW.bits()
            ),
            max_history_size: 10000,
            overflow_events: RwLock::new(Vec::new()),
            overflow_callback: None,
            optimization_suggestions: RwLock::new(Vec::new()),
            last_analysis_time: AtomicU64::new(0),
            analysis_interval: 5000, // 5 seconds
        };
        
        unsafe {
            STACK_PROFILER = Some(profiler);
        }
        
        info!("Stack profiler initialized");
    }
    
    /// Record function entry
    pub fn record_function_entry(thread_id: u32, function_address: u64, 
                                frame_size: usize, parameters: usize) {
        unsafe {
            if let Some(profiler) = STACK_PROFILER.as_ref() {
                let frame = StackFrame {
                    function_address,
                    return_address: 0, // Would be populated by compiler
                    frame_size,
                    local_variables: 0, // Would be analyzed by compiler
                    parameters,
                    saved_registers: 0, // Would be analyzed by compiler
                    timestamp: get_timestamp(),
                    thread_id,
                    call_depth: 0, // Would be tracked
                };
                
                profiler.update_thread_stack(thread_id, &frame, true);
                profiler.stack_stats.total_stack_allocations.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
    
    /// Record function exit
    pub fn record_function_exit(thread_id: u32, function_address: u64) {
        unsafe {
            if let Some(profiler) = STACK_PROFILER.as_ref() {
                let frame = StackFrame {
                    function_address,
                    return_address: 0,
                    frame_size: 0,
                    local_variables: 0,
                    parameters: 0,
                    saved_registers: 0,
                    timestamp: get_timestamp(),
                    thread_id,
                    call_depth: 0,
                };
                
                profiler.update_thread_stack(thread_id, &frame, false);
                profiler.stack_stats.total_stack_deallocations.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
    
    /// Update thread stack information
    fn update_thread_stack(&self, thread_id: u32, frame: &StackFrame, is_entry: bool) {
        let mut thread_stacks = self.thread_stacks.write();
        
        let thread_data = thread_stacks.entry(thread_id).or_insert_with(|| {
            ThreadStackData {
                thread_id,
                current_depth: 0,
                peak_depth: 0,
                stack_base: 0, // Would be set from actual stack base
                stack_limit: self.stack_size_limit as u64,
                frame_history: Vec::new(),
                last_update: get_timestamp(),
            }
        });
        
        if is_entry {
            // Function entry - increase depth and track frame
            thread_data.current_depth += 1;
            if thread_data.current_depth > thread_data.peak_depth {
                thread_data.peak_depth = thread_data.current_depth;
                self.stack_stats.max_depth_reached
                    .fetch_max(thread_data.current_depth as u64, Ordering::SeqCst);
            }
            
            // Update frame history
            thread_data.frame_history.push(frame.clone());
            if thread_data.frame_history.len() > 100 {
                thread_data.frame_history.remove(0);
            }
        } else {
            // Function exit - decrease depth
            if thread_data.current_depth > 0 {
                thread_data.current_depth -= 1;
            }
        }
        
        thread_data.last_update = get_timestamp();
        
        // Check for stack overflow
        self.check_stack_overflow(thread_id, thread_data);
        
        // Store frame in global history
        {
            let mut history = self.frame_history.write();
            history.push(frame.clone());
            if history.len() > self.max_history_size {
                history.remove(0);
            }
        }
        
        // Update function statistics
        self.update_function_stats(frame);
    }
    
    /// Check for stack overflow
    fn check_stack_overflow(&self, thread_id: u32, thread_data: &mut ThreadStackData) {
        let current_usage = self.estimate_stack_usage(thread_data);
        
        if current_usage > self.overflow_threshold {
            let overflow_amount = current_usage - thread_data.stack_limit as usize;
            
            // Record overflow event
            let overflow_event = StackOverflowEvent {
                thread_id,
                timestamp: get_timestamp(),
                overflow_amount,
                function_address: thread_data.frame_history.last()
                    .map(|f| f.function_address)
                    .unwrap_or(0),
                stack_base: thread_data.stack_base,
                severity: if overflow_amount > 1024 * 1024 { OverflowSeverity::Fatal }
                         else if overflow_amount > 256 * 1024 { OverflowSeverity::Critical }
                         else { OverflowSeverity::Warning },
            };
            
            self.overflow_events.write().push(overflow_event);
            self.stack_stats.stack_overflows.fetch_add(1, Ordering::SeqCst);
            
            // Call overflow callback if registered
            if let Some(callback) = self.overflow_callback {
                callback(thread_id, overflow_amount);
            }
            
            warn!("Stack overflow detected for thread {}: {} bytes", 
                  thread_id, overflow_amount);
        }
    }
    
    /// Estimate current stack usage
    fn estimate_stack_usage(&self, thread_data: &ThreadStackData) -> usize {
        // Simplified estimation - in reality would track actual stack pointer
        thread_data.current_depth * 256 // Assume average 256 bytes per frame
    }
    
    /// Update function statistics
    fn update_function_stats(&self, frame: &StackFrame) {
        let mut function_stats = self.function_stats.write();
        
        let info = function_stats.entry(frame.function_address).or_insert_with(|| {
            FunctionStackInfo {
                function_address: frame.function_address,
                function_name: None, // Would be resolved from debug info
                average_frame_size: 0,
                max_frame_size: 0,
                call_count: 0,
                total_stack_used: 0,
                optimization_potential: 0.0,
            }
        });
        
        info.call_count += 1;
        info.max_frame_size = info.max_frame_size.max(frame.frame_size);
        info.total_stack_used += frame.frame_size as u64;
        
        // Update average (simplified)
        if info.call_count > 0 {
            info.average_frame_size = (info.total_stack_used / info.call_count) as usize;
        }
    }
    
    /// Generate comprehensive stack profiling report
    pub fn generate_report(&self) -> StackProfilingReport {
        let thread_stacks = self.thread_stacks.read();
        let mut thread_snapshots = Vec::new();
        
        for (thread_id, thread_data) in thread_stacks.iter() {
            let usage = self.estimate_stack_usage(thread_data);
            let available = thread_data.stack_limit as usize - usage;
            
            thread_snapshots.push(StackSnapshot {
                thread_id: *thread_id,
                current_depth: thread_data.current_depth,
                peak_depth: thread_data.peak_depth,
                available_space: available,
                used_space: usage,
                stack_base: thread_data.stack_base,
                stack_limit: thread_data.stack_limit,
                timestamp: thread_data.last_update,
                overflow_detected: usage > thread_data.stack_limit as usize,
            });
        }
        
        // Analyze frames
        let frame_analysis = self.analyze_function_frames();
        
        // Identify optimization opportunities
        let optimization_opportunities = self.identify_optimizations();
        
        // Get overflow analysis
        let overflow_analysis = self.overflow_events.read().clone();
        
        // Generate stack heatmap
        let stack_heatmap = self.generate_stack_heatmap(&thread_snapshots);
        
        StackProfilingReport {
            timestamp: get_timestamp(),
            thread_snapshots,
            frame_analysis,
            optimization_opportunities,
            overflow_analysis,
            stack_heatmap,
        }
    }
    
    /// Analyze function frames for patterns
    fn analyze_function_frames(&self) -> Vec<FunctionStackInfo> {
        let function_stats = self.function_stats.read();
        let mut analysis = Vec::new();
        
        for (_address, info) in function_stats.iter() {
            analysis.push(info.clone());
        }
        
        // Sort by total stack usage
        analysis.sort_by(|a, b| b.total_stack_used.cmp(&a.total_stack_used));
        analysis
    }
    
    /// Identify stack optimization opportunities
    fn identify_optimizations(&self) -> Vec<StackOptimization> {
        let function_stats = self.function_stats.read();
        let mut optimizations = Vec::new();
        
        for (_address, info) in function_stats.iter() {
            // Large frame optimization
            if info.max_frame_size > 1024 * 4 { // 4KB+ frames
                optimizations.push(StackOptimization {
                    optimization_type: OptimizationType::ReduceFrameSize,
                    description: format!("Reduce stack frame size for function at 0x{:x} (current: {} bytes)", 
                                       info.function_address, info.max_frame_size),
                    estimated_savings: info.max_frame_size / 2,
                    implementation_difficulty: ImplementationDifficulty::Medium,
                    priority: OptimizationPriority::High,
                    affected_functions: vec![info.function_address],
                });
            }
            
            // High call frequency optimization
            if info.call_count > 1000 {
                optimizations.push(StackOptimization {
                    optimization_type: OptimizationType::InlineFunctions,
                    description: format!("Consider inlining function at 0x{:x} (called {} times)", 
                                       info.function_address, info.call_count),
                    estimated_savings: info.average_frame_size * (info.call_count / 1000) as usize,
                    implementation_difficulty: ImplementationDifficulty::Hard,
                    priority: OptimizationPriority::Medium,
                    affected_functions: vec![info.function_address],
                });
            }
            
            // Parameter optimization
            if info.average_frame_size > info.parameters * 8 {
                optimizations.push(StackOptimization {
                    optimization_type: OptimizationType::ParameterOptimization,
                    description: format!("Optimize parameters for function at 0x{:x}", info.function_address),
                    estimated_savings: info.parameters * 4,
                    implementation_difficulty: ImplementationDifficulty::Easy,
                    priority: OptimizationPriority::Low,
                    affected_functions: vec![info.function_address],
                });
            }
        }
        
        // Sort by priority and estimated savings
        optimizations.sort_by(|a, b| {
            b.priority.cmp(&a.priority)
                .then_with(|| b.estimated_savings.cmp(&a.estimated_savings))
        });
        
        optimizations
    }
    
    /// Generate stack visualization heatmap
    fn generate_stack_heatmap(&self, snapshots: &[StackSnapshot]) -> StackHeatmap {
        // Analyze depth levels
        let mut depth_levels = Vec::new();
        let max_depth = snapshots.iter()
            .map(|s| s.peak_depth)
            .max()
            .unwrap_or(0) as u32;
        
        for depth in 0..=max_depth {
            let functions_at_depth = self.count_functions_at_depth(depth);
            let total_usage = depth as usize * 256; // Simplified calculation
            
            depth_levels.push(DepthLevel {
                depth,
                function_count: functions_at_depth,
                total_usage,
                usage_percentage: if max_depth > 0 {
                    (depth as f32 / max_depth as f32) * 100.0
                } else {
                    0.0
                },
            });
        }
        
        // Analyze thread utilization
        let thread_utilization: Vec<ThreadUtilization> = snapshots.iter().map(|s| {
            let efficiency = if s.peak_depth > 0 {
                (s.current_depth as f32 / s.peak_depth as f32)
            } else {
                0.0
            };
            
            ThreadUtilization {
                thread_id: s.thread_id,
                current_usage: s.used_space,
                peak_usage: s.peak_depth * 256, // Simplified
                total_allocations: s.peak_depth as u64,
                efficiency_score: efficiency,
            }
        }).collect();
        
        // Analyze function footprint
        let function_stats = self.function_stats.read();
        let function_footprint: Vec<FunctionFootprint> = function_stats.values()
            .map(|info| {
                FunctionFootprint {
                    function_address: info.function_address,
                    max_depth_reached: info.call_count as u32, // Simplified
                    call_frequency: info.call_count,
                    memory_footprint: info.max_frame_size,
                }
            })
            .collect();
        
        StackHeatmap {
            depth_levels,
            thread_utilization,
            function_footprint,
        }
    }
    
    /// Count functions at a specific depth
    fn count_functions_at_depth(&self, depth: u32) -> u32 {
        let frames = self.frame_history.read();
        frames.iter()
            .filter(|frame| frame.call_depth == depth)
            .count() as u32
    }
    
    /// Set overflow callback
    pub fn set_overflow_callback(callback: fn(u32, usize)) {
        unsafe {
            if let Some(profiler) = STACK_PROFILER.as_mut() {
                profiler.overflow_callback = Some(callback);
            }
        }
    }
    
    /// Configure stack monitoring
    pub fn configure_monitoring(flags: StackFlags, stack_size_limit: usize, 
                               overflow_threshold: usize) {
        unsafe {
            if let Some(profiler) = STACK_PROFILER.as_mut() {
                profiler.monitoring_flags.store(flags.bits(), Ordering::SeqCst);
                profiler.stack_size_limit = stack_size_limit;
                profiler.overflow_threshold = overflow_threshold;
            }
        }
    }
    
    /// Get stack statistics
    pub fn get_statistics(&self) -> StackStatistics {
        StackStatistics {
            total_allocations: self.stack_stats.total_stack_allocations.load(Ordering::SeqCst),
            total_deallocations: self.stack_stats.total_stack_deallocations.load(Ordering::SeqCst),
            max_depth_reached: self.stack_stats.max_depth_reached.load(Ordering::SeqCst),
            stack_overflows: self.stack_stats.stack_overflows.load(Ordering::SeqCst),
            average_depth: self.stack_stats.average_depth.load(Ordering::SeqCst),
            thread_count: self.stack_stats.thread_count.load(Ordering::SeqCst),
            total_stack_memory: self.stack_stats.total_stack_memory.load(Ordering::SeqCst),
            active_threads: self.thread_stacks.read().len() as u32,
        }
    }
    
    /// Clear profiling data
    pub fn clear_data() {
        unsafe {
            if let Some(profiler) = STACK_PROFILER.as_mut() {
                profiler.thread_stacks.write().clear();
                profiler.frame_history.write().clear();
                profiler.function_stats.write().clear();
                profiler.overflow_events.write().clear();
                profiler.optimization_suggestions.write().clear();
                profiler.stack_stats = StackStats {
                    total_stack_allocations: AtomicU64::new(0),
                    total_stack_deallocations: AtomicU64::new(0),
                    max_depth_reached: AtomicU64::new(0),
                    stack_overflows: AtomicU64::new(0),
                    average_depth: AtomicU64::new(0),
                    depth_variance: AtomicU64::new(0),
                    thread_count: AtomicU32::new(0),
                    total_stack_memory: AtomicU64::new(0),
                };
                info!("Stack profiling data cleared");
            }
        }
    }
}

/// Stack statistics summary
#[derive(Debug, Clone)]
pub struct StackStatistics {
    pub total_allocations: u64,
    pub total_deallocations: u64,
    pub max_depth_reached: u64,
    pub stack_overflows: u64,
    pub average_depth: u64,
    pub thread_count: u32,
    pub total_stack_memory: u64,
    pub active_threads: u32,
}

/// Global stack profiler instance
static mut STACK_PROFILER: Option<StackProfiler> = None;

// Placeholder function
fn get_timestamp() -> u64 {
    // TODO: Integrate with actual system time
    0
}