//! MultiOS Scheduler Module
//! 
//! This module provides process and thread scheduling functionality.

use crate::log::{info, warn, error};
use spin::Mutex;

/// Scheduler initialization
pub fn init() -> Result<(), crate::KernelError> {
    info!("Initializing scheduler...");
    Ok(())
}

/// Yield current thread
pub fn yield_current_thread() {
    // Placeholder for thread yielding
}

/// Scheduler statistics
#[derive(Debug, Clone, Copy)]
pub struct SchedulerStats {
    pub ready_threads: usize,
    pub running_threads: usize,
    pub blocked_threads: usize,
    pub scheduler_runs: u64,
    pub context_switches: u64,
}

/// Thread state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ThreadState {
    Running = 0,
    Ready = 1,
    Blocked = 2,
    Terminated = 3,
}

/// Thread priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ThreadPriority {
    Idle = 0,
    Low = 1,
    Normal = 2,
    High = 3,
    RealTime = 4,
}

/// Scheduler state
static SCHEDULER_STATE: Mutex<Option<SchedulerState>> = Mutex::new(None);

/// Global scheduler state
#[derive(Debug, Clone)]
struct SchedulerState {
    initialized: bool,
    timer_ticks: u64,
    quantum_ticks: u32,
    current_thread: Option<ThreadId>,
    ready_threads: Vec<ThreadId>,
    statistics: SchedulerStats,
}

/// Timer interrupt handler for scheduler
pub fn timer_interrupt_occurred() {
    info!("Timer interrupt occurred - rescheduling");
    
    let mut state = SCHEDULER_STATE.lock();
    
    if let Some(scheduler) = state.as_mut() {
        scheduler.timer_ticks += 1;
        scheduler.statistics.scheduler_runs += 1;
        
        // Perform scheduling based on quantum
        if scheduler.timer_ticks % scheduler.quantum_ticks as u64 == 0 {
            perform_scheduling();
        }
    }
    
    // Release the lock before potentially blocking
    drop(state);
    
    // Check if we need to switch threads
    check_thread_switch();
}

/// Perform actual scheduling operation
fn perform_scheduling() {
    info!("Performing thread scheduling");
    
    // This would implement the actual scheduling algorithm
    // For now, just update statistics
    let mut state = SCHEDULER_STATE.lock();
    if let Some(scheduler) = state.as_mut() {
        scheduler.statistics.context_switches += 1;
    }
}

/// Check if thread switch is needed
fn check_thread_switch() {
    // This would check if the current thread should yield
    // and switch to the next ready thread
}

/// Initialize scheduler with configuration
pub fn init_with_config(config: SchedulerConfig) -> Result<(), crate::KernelError> {
    info!("Initializing scheduler with config...");
    
    let state = SchedulerState {
        initialized: true,
        timer_ticks: 0,
        quantum_ticks: config.quantum_milliseconds,
        current_thread: None,
        ready_threads: Vec::new(),
        statistics: SchedulerStats {
            ready_threads: 0,
            running_threads: 0,
            blocked_threads: 0,
            scheduler_runs: 0,
            context_switches: 0,
        },
    };
    
    *SCHEDULER_STATE.lock() = Some(state);
    
    info!("Scheduler initialized with quantum: {}ms", config.quantum_milliseconds);
    Ok(())
}

/// Scheduler configuration
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    pub quantum_milliseconds: u32,  // Time quantum in milliseconds
    pub max_threads: usize,         // Maximum number of threads
    pub enable_preemption: bool,    // Enable preemptive scheduling
    pub scheduling_policy: SchedulingPolicy,
}

/// Scheduling policies
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum SchedulingPolicy {
    RoundRobin = 0,
    Priority = 1,
    FirstComeFirstServed = 2,
    ShortestJobFirst = 3,
    MultilevelFeedback = 4,
}

/// Thread identifier type
pub type ThreadId = usize;

/// Thread control block
#[derive(Debug, Clone)]
pub struct ThreadControlBlock {
    pub id: ThreadId,
    pub priority: ThreadPriority,
    pub state: ThreadState,
    pub stack_pointer: usize,
    pub program_counter: usize,
    pub quantum_remaining: u32,
    pub creation_time: u64,
    pub last_scheduled: u64,
}

/// Yield current thread and schedule next
pub fn yield_current_thread() {
    info!("Yielding current thread");
    
    let mut state = SCHEDULER_STATE.lock();
    
    if let Some(scheduler) = state.as_mut() {
        scheduler.statistics.context_switches += 1;
        
        // This would perform the actual context switch
        // For now, just update statistics
        info!("Thread context switch performed");
    }
}

/// Get scheduler statistics
pub fn get_scheduler_stats() -> SchedulerStats {
    let state = SCHEDULER_STATE.lock();
    
    if let Some(scheduler) = state.as_ref() {
        scheduler.statistics
    } else {
        SchedulerStats {
            ready_threads: 0,
            running_threads: 0,
            blocked_threads: 0,
            scheduler_runs: 0,
            context_switches: 0,
        }
    }
}

/// Check if scheduler is initialized
pub fn is_scheduler_initialized() -> bool {
    let state = SCHEDULER_STATE.lock();
    state.as_ref().map(|s| s.initialized).unwrap_or(false)
}

/// Initialize default scheduler (for backward compatibility)
impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum_milliseconds: 10, // 10ms default quantum
            max_threads: 1000,
            enable_preemption: true,
            scheduling_policy: SchedulingPolicy::RoundRobin,
        }
    }
}