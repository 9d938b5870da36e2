//! Scheduler module
//! 
//! This module provides task scheduling functionality.

use crate::KernelResult;
use log::debug;

/// Process/Thread ID type
pub type ProcessId = u32;
pub type ThreadId = u32;

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    Waiting,
    Sleeping,
    Stopped,
    Terminated,
}

/// Thread information
#[derive(Debug, Clone)]
pub struct ThreadInfo {
    pub thread_id: ThreadId,
    pub process_id: ProcessId,
    pub state: ProcessState,
    pub priority: u8,
    pub time_slice: u64,
}

/// Initialize scheduler
pub fn init() -> KernelResult<()> {
    debug!("Initializing scheduler...");
    
    // TODO: Implement scheduler
    // - Set up run queues
    // - Initialize scheduling algorithm
    // - Set up timer-based preemption
    
    debug!("Scheduler initialized");
    
    Ok(())
}

/// Schedule next thread to run
pub fn schedule_next() {
    debug!("Scheduling next thread...");
    
    // TODO: Implement actual scheduling logic
    // - Select next thread from run queue
    // - Perform context switch
    // - Update process statistics
}

/// Yield current thread
pub fn yield_current_thread() {
    debug!("Yielding current thread...");
    
    // TODO: Implement thread yielding
    // - Save current thread state
    // - Add to end of run queue
    // - Schedule next thread
}

/// Create a new process
pub fn create_process(_executable: &[u8]) -> KernelResult<ProcessId> {
    debug!("Creating new process...");
    
    // TODO: Implement process creation
    // - Allocate process control block
    // - Set up memory mapping
    // - Initialize thread
    
    Ok(1)
}

/// Terminate process
pub fn terminate_process(_pid: ProcessId) -> KernelResult<()> {
    debug!("Terminating process {}...", _pid);
    
    // TODO: Implement process termination
    // - Clean up resources
    // - Release memory
    // - Signal parent
    
    Ok(())
}

/// Get current process ID
pub fn get_current_process_id() -> ProcessId {
    1 // Dummy process ID
}

/// Get current thread ID
pub fn get_current_thread_id() -> ThreadId {
    1 // Dummy thread ID
}

/// Set process priority
pub fn set_process_priority(_pid: ProcessId, _priority: u8) -> KernelResult<()> {
    // TODO: Implement priority setting
    Ok(())
}

/// Get process information
pub fn get_process_info(_pid: ProcessId) -> KernelResult<ThreadInfo> {
    Ok(ThreadInfo {
        thread_id: 1,
        process_id: 1,
        state: ProcessState::Running,
        priority: 128,
        time_slice: 0,
    })
}

/// Sleep current thread for specified milliseconds
pub fn sleep_ms(_milliseconds: u32) {
    debug!("Sleeping for {} ms...", _milliseconds);
    
    // TODO: Implement thread sleeping
    // - Add to sleep queue
    // - Set wake-up time
    // - Yield CPU
}

/// Wake up sleeping thread
pub fn wake_thread(_tid: ThreadId) {
    debug!("Waking thread {}...", _tid);
    
    // TODO: Implement thread wakeup
    // - Remove from sleep queue
    // - Add to run queue
}
