//! POSIX pthread.h Compatibility
//! 
//! This module provides comprehensive pthread.h compatibility for MultiOS,
//! including thread creation, synchronization primitives, and thread-specific
//! data while maintaining Rust safety guarantees.

use crate::errors::*;
use crate::internal::*;
use crate::types::*;
use crate::syscall;
use core::ffi;
use core::ptr;

/// Thread identifier type
pub type pthread_t = usize;

/// Thread attribute type
pub type pthread_attr_t = usize;

/// Mutex type
pub type pthread_mutex_t = usize;

/// Mutex attribute type
pub type pthread_mutexattr_t = usize;

/// Condition variable type
pub type pthread_cond_t = usize;

/// Condition variable attribute type
pub type pthread_condattr_t = usize;

/// Read-write lock type
pub type pthread_rwlock_t = usize;

/// Read-write lock attribute type
pub type pthread_rwlockattr_t = usize;

/// Barrier type
pub type pthread_barrier_t = usize;

/// Barrier attribute type
pub type pthread_barrierattr_t = usize;

/// Spinlock type
pub type pthread_spinlock_t = usize;

/// Spinlock attribute type
pub type pthread_spinlockattr_t = usize;

/// Key for thread-specific data
pub type pthread_key_t = usize;

/// One-time initialization type
pub type pthread_once_t = usize;

/// Thread creation attributes
/// 
/// This structure contains attributes for thread creation, providing
/// compatibility with pthread_attr_t while maintaining Rust safety.
#[derive(Debug, Clone)]
pub struct ThreadAttributes {
    pub detach_state: DetachState,     // Detach state (JOINABLE or DETACHED)
    pub scope: ThreadScope,            // Thread scope (SYSTEM or PROCESS)
    pub inheritsched: InheritSched,    // Inherit scheduling
    pub schedpolicy: SchedPolicy,      // Scheduling policy
    pub schedparam: SchedParam,        // Scheduling parameters
    pub guardsize: usize,              // Guard size for stack
    pub stacksize: usize,              // Stack size
    pub stackaddr: Option<*mut u8>,    // Stack address
    pub stack: Option<ThreadStack>,    // Stack information
}

/// Detach state for threads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachState {
    Joinable,          // Thread can be joined
    Detached,          // Thread is detached
}

/// Thread scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadScope {
    System,            // System-wide contention scope
    Process,           // Process-wide contention scope
}

/// Scheduling inheritance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InheritSched {
    Inherit,           // Inherit scheduling attributes from parent
    Explicit,          // Explicit scheduling attributes
}

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedPolicy {
    Other,             // Default scheduling policy
    Fifo,              // First-in-first-out
    RoundRobin,        // Round-robin
    Batch,             // Batch scheduling
    Idle,              // Idle scheduling
    Deadline,          // Deadline scheduling
}

/// Scheduling parameters
#[derive(Debug, Clone, Copy)]
pub struct SchedParam {
    pub priority: i32,    // Scheduling priority
}

/// Thread stack information
#[derive(Debug, Clone)]
pub struct ThreadStack {
    pub base: *mut u8,    // Stack base address
    pub size: usize,      // Stack size
    pub guardsize: usize, // Guard size
}

/// Mutex attributes
/// 
/// This structure contains attributes for mutex creation, providing
/// compatibility with pthread_mutexattr_t while maintaining Rust safety.
#[derive(Debug, Clone, Copy)]
pub struct MutexAttributes {
    pub type_: MutexType,         // Mutex type
    pub protocol: MutexProtocol,  // Mutex protocol
    pub prioceiling: i32,         // Priority ceiling
    pub robust: MutexRobust,      // Robust mutex handling
}

/// Mutex types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutexType {
    Normal,             // Non-recursive, no error checking
    ErrorCheck,         // Non-recursive, error checking
    Recursive,          // Recursive mutex
    Default,            // Default mutex type
}

/// Mutex protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutexProtocol {
    None,               // No protocol
    Priority,           // Priority inheritance
    PriorityProtect,    // Priority protection
}

/// Robust mutex handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutexRobust {
    NonRobust,          // Non-robust mutex
    Robust,             // Robust mutex
}

/// Condition variable attributes
/// 
/// This structure contains attributes for condition variable creation, providing
/// compatibility with pthread_condattr_t while maintaining Rust safety.
#[derive(Debug, Clone, Copy)]
pub struct CondAttributes {
    pub pshared: CondPShared,     // Process-shared attribute
    pub clock: ClockId,           // Clock ID for timed waits
}

/// Process-shared attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CondPShared {
    Private,             // Process-private condition variable
    Shared,              // Process-shared condition variable
}

/// Clock ID for condition variable operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockId {
    Realtime,            // CLOCK_REALTIME
    Monotonic,           // CLOCK_MONOTONIC
}

/// Read-write lock attributes
/// 
/// This structure contains attributes for read-write lock creation, providing
/// compatibility with pthread_rwlockattr_t while maintaining Rust safety.
#[derive(Debug, Clone, Copy)]
pub struct RWLockAttributes {
    pub pshared: RWLockPShared,   // Process-shared attribute
}

/// Process-shared attribute for read-write locks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RWLockPShared {
    Private,             // Process-private read-write lock
    Shared,              // Process-shared read-write lock
}

/// Barrier attributes
/// 
/// This structure contains attributes for barrier creation, providing
/// compatibility with pthread_barrierattr_t while maintaining Rust safety.
#[derive(Debug, Clone, Copy)]
pub struct BarrierAttributes {
    pub pshared: BarrierPShared,  // Process-shared attribute
}

/// Process-shared attribute for barriers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierPShared {
    Private,             // Process-private barrier
    Shared,              // Process-shared barrier
}

/// Spinlock attributes
/// 
/// This structure contains attributes for spinlock creation, providing
/// compatibility with pthread_spinlockattr_t while maintaining Rust safety.
#[derive(Debug, Clone, Copy)]
pub struct SpinLockAttributes {
    pub pshared: SpinLockPShared, // Process-shared attribute
}

/// Process-shared attribute for spinlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinLockPShared {
    Private,             // Process-private spinlock
    Shared,              // Process-shared spinlock
}

/// Initialize thread attributes
/// 
/// This function provides compatibility with pthread_attr_init().
/// 
/// # Arguments
/// * `attr` - Thread attributes to initialize
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn attr_init(attr: &mut ThreadAttributes) -> PosixResult<()> {
    *attr = ThreadAttributes {
        detach_state: DetachState::Joinable,
        scope: ThreadScope::System,
        inheritsched: InheritSched::Inherit,
        schedpolicy: SchedPolicy::Other,
        schedparam: SchedParam { priority: 0 },
        guardsize: 4096, // Default guard size
        stacksize: 2 * 1024 * 1024, // Default stack size (2MB)
        stackaddr: None,
        stack: None,
    };
    Ok(())
}

/// Destroy thread attributes
/// 
/// This function provides compatibility with pthread_attr_destroy().
/// 
/// # Arguments
/// * `attr` - Thread attributes to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn attr_destroy(attr: &mut ThreadAttributes) -> PosixResult<()> {
    // In a real implementation, this would free any resources
    // For now, just reset to default state
    *attr = ThreadAttributes {
        detach_state: DetachState::Joinable,
        scope: ThreadScope::System,
        inheritsched: InheritSched::Inherit,
        schedpolicy: SchedPolicy::Other,
        schedparam: SchedParam { priority: 0 },
        guardsize: 4096,
        stacksize: 2 * 1024 * 1024,
        stackaddr: None,
        stack: None,
    };
    Ok(())
}

/// Set detach state
/// 
/// This function provides compatibility with pthread_attr_setdetachstate().
/// 
/// # Arguments
/// * `attr` - Thread attributes
/// * `detachstate` - Detach state (DETACHED or JOINABLE)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on set, error on failure
pub fn attr_setdetachstate(attr: &mut ThreadAttributes, detachstate: DetachState) -> PosixResult<()> {
    attr.detach_state = detachstate;
    Ok(())
}

/// Get detach state
/// 
/// This function provides compatibility with pthread_attr_getdetachstate().
/// 
/// # Arguments
/// * `attr` - Thread attributes
/// * `detachstate` - Pointer to store detach state
/// 
/// # Returns
/// * `PosixResult<()>` - Success on get, error on failure
pub fn attr_getdetachstate(attr: &ThreadAttributes, detachstate: &mut DetachState) -> PosixResult<()> {
    *detachstate = attr.detach_state;
    Ok(())
}

/// Set stack size
/// 
/// This function provides compatibility with pthread_attr_setstacksize().
/// 
/// # Arguments
/// * `attr` - Thread attributes
/// * `stacksize` - Stack size in bytes
/// 
/// # Returns
/// * `PosixResult<()>` - Success on set, error on failure
pub fn attr_setstacksize(attr: &mut ThreadAttributes, stacksize: usize) -> PosixResult<()> {
    if stacksize < 16384 { // Minimum stack size
        return Err(Errno::Einval);
    }
    attr.stacksize = stacksize;
    Ok(())
}

/// Get stack size
/// 
/// This function provides compatibility with pthread_attr_getstacksize().
/// 
/// # Arguments
/// * `attr` - Thread attributes
/// * `stacksize` - Pointer to store stack size
/// 
/// # Returns
/// * `PosixResult<()>` - Success on get, error on failure
pub fn attr_getstacksize(attr: &ThreadAttributes, stacksize: &mut usize) -> PosixResult<()> {
    *stacksize = attr.stacksize;
    Ok(())
}

/// Create a thread
/// 
/// This function provides compatibility with pthread_create().
/// 
/// # Arguments
/// * `thread` - Pointer to store thread ID
/// * `attr` - Thread attributes (NULL for default)
/// * `start_routine` - Thread start routine
/// * `arg` - Argument to pass to start routine
/// 
/// # Returns
/// * `PosixResult<()>` - Success on creation, error on failure
pub fn create<T>(
    thread: &mut pthread_t,
    attr: Option<&ThreadAttributes>,
    start_routine: fn(*mut T) -> *mut u8,
    arg: *mut T,
) -> PosixResult<()>
where
    T: Send + Sync,
{
    if thread.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would call syscall::clone
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Join with a terminated thread
/// 
/// This function provides compatibility with pthread_join().
/// 
/// # Arguments
/// * `thread` - Thread ID to join
/// * `retval` - Pointer to store thread return value (NULL to ignore)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on join, error on failure
pub fn join(thread: pthread_t, retval: Option<&mut *mut u8>) -> PosixResult<()> {
    if thread == 0 {
        return Err(Errno::Einval);
    }
    
    // In a real implementation, this would wait for the thread to terminate
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Detach a thread
/// 
/// This function provides compatibility with pthread_detach().
/// 
/// # Arguments
/// * `thread` - Thread ID to detach
/// 
/// # Returns
/// * `PosixResult<()>` - Success on detach, error on failure
pub fn detach(thread: pthread_t) -> PosixResult<()> {
    if thread == 0 {
        return Err(Errno::Einval);
    }
    
    // In a real implementation, this would detach the thread
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get the current thread ID
/// 
/// This function provides compatibility with pthread_self().
/// 
/// # Returns
/// * `pthread_t` - ID of the current thread
pub fn self_() -> pthread_t {
    // In a real implementation, this would get the current thread ID
    // For now, return a placeholder
    1
}

/// Equal thread IDs
/// 
/// This function provides compatibility with pthread_equal().
/// 
/// # Arguments
/// * `t1` - First thread ID
/// * `t2` - Second thread ID
/// 
/// # Returns
/// * `bool` - True if thread IDs are equal, false otherwise
pub fn equal(t1: pthread_t, t2: pthread_t) -> bool {
    t1 == t2
}

/// Cancel a thread
/// 
/// This function provides compatibility with pthread_cancel().
/// 
/// # Arguments
/// * `thread` - Thread ID to cancel
/// 
/// # Returns
/// * `PosixResult<()>` - Success on cancel, error on failure
pub fn cancel(thread: pthread_t) -> PosixResult<()> {
    if thread == 0 {
        return Err(Errno::Einval);
    }
    
    // In a real implementation, this would send a cancellation request
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set cancelability state
/// 
/// This function provides compatibility with pthread_setcancelstate().
/// 
/// # Arguments
/// * `state` - New cancelability state
/// * `oldstate` - Pointer to store old cancelability state (NULL to ignore)
/// 
/// # Returns
/// * `PosixResult<CancelState>` - Old cancelability state, error on failure
pub fn setcancelstate(state: CancelState, oldstate: Option<&mut CancelState>) -> PosixResult<CancelState> {
    let old = CancelState::Enabled; // Default to enabled
    if let Some(old_state) = oldstate {
        *old_state = old;
    }
    
    // In a real implementation, this would set the cancelability state
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Cancelability state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelState {
    Enabled,             // Cancellation is enabled
    Disabled,            // Cancellation is disabled
}

/// Initialize mutex attributes
/// 
/// This function provides compatibility with pthread_mutexattr_init().
/// 
/// # Arguments
/// * `attr` - Mutex attributes to initialize
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn mutexattr_init(attr: &mut MutexAttributes) -> PosixResult<()> {
    *attr = MutexAttributes {
        type_: MutexType::Default,
        protocol: MutexProtocol::None,
        prioceiling: 0,
        robust: MutexRobust::NonRobust,
    };
    Ok(())
}

/// Destroy mutex attributes
/// 
/// This function provides compatibility with pthread_mutexattr_destroy().
/// 
/// # Arguments
/// * `attr` - Mutex attributes to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn mutexattr_destroy(attr: &mut MutexAttributes) -> PosixResult<()> {
    // In a real implementation, this would free any resources
    *attr = MutexAttributes {
        type_: MutexType::Default,
        protocol: MutexProtocol::None,
        prioceiling: 0,
        robust: MutexRobust::NonRobust,
    };
    Ok(())
}

/// Initialize a mutex
/// 
/// This function provides compatibility with pthread_mutex_init().
/// 
/// # Arguments
/// * `mutex` - Mutex to initialize
/// * `attr` - Mutex attributes (NULL for default)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn mutex_init(mutex: &mut pthread_mutex_t, attr: Option<&MutexAttributes>) -> PosixResult<()> {
    if mutex.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would initialize the mutex
    // For now, set a placeholder value
    *mutex = 1;
    Ok(())
}

/// Destroy a mutex
/// 
/// This function provides compatibility with pthread_mutex_destroy().
/// 
/// # Arguments
/// * `mutex` - Mutex to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn mutex_destroy(mutex: &pthread_mutex_t) -> PosixResult<()> {
    if mutex.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would destroy the mutex
    // For now, just check if it's valid
    Ok(())
}

/// Lock a mutex
/// 
/// This function provides compatibility with pthread_mutex_lock().
/// 
/// # Arguments
/// * `mutex` - Mutex to lock
/// 
/// # Returns
/// * `PosixResult<()>` - Success on lock, error on failure
pub fn mutex_lock(mutex: &pthread_mutex_t) -> PosixResult<()> {
    if mutex.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would lock the mutex
    // For now, just check if it's valid
    Ok(())
}

/// Try to lock a mutex
/// 
/// This function provides compatibility with pthread_mutex_trylock().
/// 
/// # Arguments
/// * `mutex` - Mutex to try to lock
/// 
/// # Returns
/// * `PosixResult<()>` - Success on lock, error on failure
pub fn mutex_trylock(mutex: &pthread_mutex_t) -> PosixResult<()> {
    if mutex.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would try to lock the mutex
    // For now, just check if it's valid
    Ok(())
}

/// Unlock a mutex
/// 
/// This function provides compatibility with pthread_mutex_unlock().
/// 
/// # Arguments
/// * `mutex` - Mutex to unlock
/// 
/// # Returns
/// * `PosixResult<()>` - Success on unlock, error on failure
pub fn mutex_unlock(mutex: &pthread_mutex_t) -> PosixResult<()> {
    if mutex.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would unlock the mutex
    // For now, just check if it's valid
    Ok(())
}

/// Initialize condition variable attributes
/// 
/// This function provides compatibility with pthread_condattr_init().
/// 
/// # Arguments
/// * `attr` - Condition variable attributes to initialize
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn condattr_init(attr: &mut CondAttributes) -> PosixResult<()> {
    *attr = CondAttributes {
        pshared: CondPShared::Private,
        clock: ClockId::Realtime,
    };
    Ok(())
}

/// Destroy condition variable attributes
/// 
/// This function provides compatibility with pthread_condattr_destroy().
/// 
/// # Arguments
/// * `attr` - Condition variable attributes to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn condattr_destroy(attr: &mut CondAttributes) -> PosixResult<()> {
    *attr = CondAttributes {
        pshared: CondPShared::Private,
        clock: ClockId::Realtime,
    };
    Ok(())
}

/// Initialize a condition variable
/// 
/// This function provides compatibility with pthread_cond_init().
/// 
/// # Arguments
/// * `cond` - Condition variable to initialize
/// * `attr` - Condition variable attributes (NULL for default)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn cond_init(cond: &mut pthread_cond_t, attr: Option<&CondAttributes>) -> PosixResult<()> {
    if cond.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would initialize the condition variable
    // For now, set a placeholder value
    *cond = 1;
    Ok(())
}

/// Destroy a condition variable
/// 
/// This function provides compatibility with pthread_cond_destroy().
/// 
/// # Arguments
/// * `cond` - Condition variable to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn cond_destroy(cond: &pthread_cond_t) -> PosixResult<()> {
    if cond.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would destroy the condition variable
    Ok(())
}

/// Wait on a condition variable
/// 
/// This function provides compatibility with pthread_cond_wait().
/// 
/// # Arguments
/// * `cond` - Condition variable to wait on
/// * `mutex` - Mutex associated with condition variable
/// 
/// # Returns
/// * `PosixResult<()>` - Success on wait, error on failure
pub fn cond_wait(cond: &pthread_cond_t, mutex: &pthread_mutex_t) -> PosixResult<()> {
    if cond.is_null() || mutex.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would wait on the condition variable
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Signal a condition variable
/// 
/// This function provides compatibility with pthread_cond_signal().
/// 
/// # Arguments
/// * `cond` - Condition variable to signal
/// 
/// # Returns
/// * `PosixResult<()>` - Success on signal, error on failure
pub fn cond_signal(cond: &pthread_cond_t) -> PosixResult<()> {
    if cond.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would signal the condition variable
    Ok(())
}

/// Broadcast a condition variable
/// 
/// This function provides compatibility with pthread_cond_broadcast().
/// 
/// # Arguments
/// * `cond` - Condition variable to broadcast
/// 
/// # Returns
/// * `PosixResult<()>` - Success on broadcast, error on failure
pub fn cond_broadcast(cond: &pthread_cond_t) -> PosixResult<()> {
    if cond.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would broadcast the condition variable
    Ok(())
}

/// Initialize read-write lock attributes
/// 
/// This function provides compatibility with pthread_rwlockattr_init().
/// 
/// # Arguments
/// * `attr` - Read-write lock attributes to initialize
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn rwlockattr_init(attr: &mut RWLockAttributes) -> PosixResult<()> {
    *attr = RWLockAttributes {
        pshared: RWLockPShared::Private,
    };
    Ok(())
}

/// Destroy read-write lock attributes
/// 
/// This function provides compatibility with pthread_rwlockattr_destroy().
/// 
/// # Arguments
/// * `attr` - Read-write lock attributes to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn rwlockattr_destroy(attr: &mut RWLockAttributes) -> PosixResult<()> {
    *attr = RWLockAttributes {
        pshared: RWLockPShared::Private,
    };
    Ok(())
}

/// Initialize a read-write lock
/// 
/// This function provides compatibility with pthread_rwlock_init().
/// 
/// # Arguments
/// * `rwlock` - Read-write lock to initialize
/// * `attr` - Read-write lock attributes (NULL for default)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn rwlock_init(rwlock: &mut pthread_rwlock_t, attr: Option<&RWLockAttributes>) -> PosixResult<()> {
    if rwlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would initialize the read-write lock
    *rwlock = 1;
    Ok(())
}

/// Destroy a read-write lock
/// 
/// This function provides compatibility with pthread_rwlock_destroy().
/// 
/// # Arguments
/// * `rwlock` - Read-write lock to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn rwlock_destroy(rwlock: &pthread_rwlock_t) -> PosixResult<()> {
    if rwlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would destroy the read-write lock
    Ok(())
}

/// Acquire read lock on read-write lock
/// 
/// This function provides compatibility with pthread_rwlock_rdlock().
/// 
/// # Arguments
/// * `rwlock` - Read-write lock to acquire read lock on
/// 
/// # Returns
/// * `PosixResult<()>` - Success on acquire, error on failure
pub fn rwlock_rdlock(rwlock: &pthread_rwlock_t) -> PosixResult<()> {
    if rwlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would acquire the read lock
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Acquire write lock on read-write lock
/// 
/// This function provides compatibility with pthread_rwlock_wrlock().
/// 
/// # Arguments
/// * `rwlock` - Read-write lock to acquire write lock on
/// 
/// # Returns
/// * `PosixResult<()>` - Success on acquire, error on failure
pub fn rwlock_wrlock(rwlock: &pthread_rwlock_t) -> PosixResult<()> {
    if rwlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would acquire the write lock
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Unlock read-write lock
/// 
/// This function provides compatibility with pthread_rwlock_unlock().
/// 
/// # Arguments
/// * `rwlock` - Read-write lock to unlock
/// 
/// # Returns
/// * `PosixResult<()>` - Success on unlock, error on failure
pub fn rwlock_unlock(rwlock: &pthread_rwlock_t) -> PosixResult<()> {
    if rwlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would unlock the read-write lock
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Initialize barrier attributes
/// 
/// This function provides compatibility with pthread_barrierattr_init().
/// 
/// # Arguments
/// * `attr` - Barrier attributes to initialize
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn barrierattr_init(attr: &mut BarrierAttributes) -> PosixResult<()> {
    *attr = BarrierAttributes {
        pshared: BarrierPShared::Private,
    };
    Ok(())
}

/// Destroy barrier attributes
/// 
/// This function provides compatibility with pthread_barrierattr_destroy().
/// 
/// # Arguments
/// * `attr` - Barrier attributes to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn barrierattr_destroy(attr: &mut BarrierAttributes) -> PosixResult<()> {
    *attr = BarrierAttributes {
        pshared: BarrierPShared::Private,
    };
    Ok(())
}

/// Initialize a barrier
/// 
/// This function provides compatibility with pthread_barrier_init().
/// 
/// # Arguments
/// * `barrier` - Barrier to initialize
/// * `attr` - Barrier attributes (NULL for default)
/// * `count` - Number of threads that must call pthread_barrier_wait()
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn barrier_init(barrier: &mut pthread_barrier_t, attr: Option<&BarrierAttributes>, count: i32) -> PosixResult<()> {
    if barrier.is_null() || count <= 0 {
        return Err(Errno::Einval);
    }
    
    // In a real implementation, this would initialize the barrier
    *barrier = 1;
    Ok(())
}

/// Destroy a barrier
/// 
/// This function provides compatibility with pthread_barrier_destroy().
/// 
/// # Arguments
/// * `barrier` - Barrier to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn barrier_destroy(barrier: &pthread_barrier_t) -> PosixResult<()> {
    if barrier.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would destroy the barrier
    Ok(())
}

/// Wait at a barrier
/// 
/// This function provides compatibility with pthread_barrier_wait().
/// 
/// # Arguments
/// * `barrier` - Barrier to wait at
/// 
/// # Returns
/// * `PosixResult<BarrierWaitResult>` - Barrier wait result, error on failure
pub fn barrier_wait(barrier: &pthread_barrier_t) -> PosixResult<BarrierWaitResult> {
    if barrier.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would wait at the barrier
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Barrier wait result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierWaitResult {
    Success,             // Successful wait
    NotLast,             // Not the last thread to reach barrier
}

/// Initialize spinlock attributes
/// 
/// This function provides compatibility with pthread_spinlockattr_init().
/// 
/// # Arguments
/// * `attr` - Spinlock attributes to initialize
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn spinlockattr_init(attr: &mut SpinLockAttributes) -> PosixResult<()> {
    *attr = SpinLockAttributes {
        pshared: SpinLockPShared::Private,
    };
    Ok(())
}

/// Destroy spinlock attributes
/// 
/// This function provides compatibility with pthread_spinlockattr_destroy().
/// 
/// # Arguments
/// * `attr` - Spinlock attributes to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn spinlockattr_destroy(attr: &mut SpinLockAttributes) -> PosixResult<()> {
    *attr = SpinLockAttributes {
        pshared: SpinLockPShared::Private,
    };
    Ok(())
}

/// Initialize a spinlock
/// 
/// This function provides compatibility with pthread_spin_init().
/// 
/// # Arguments
/// * `spinlock` - Spinlock to initialize
/// * `pshared` - Process-shared attribute
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn spin_init(spinlock: &mut pthread_spinlock_t, pshared: SpinLockPShared) -> PosixResult<()> {
    if spinlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would initialize the spinlock
    *spinlock = 1;
    Ok(())
}

/// Destroy a spinlock
/// 
/// This function provides compatibility with pthread_spin_destroy().
/// 
/// # Arguments
/// * `spinlock` - Spinlock to destroy
/// 
/// # Returns
/// * `PosixResult<()>` - Success on destruction, error on failure
pub fn spin_destroy(spinlock: &pthread_spinlock_t) -> PosixResult<()> {
    if spinlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would destroy the spinlock
    Ok(())
}

/// Lock a spinlock
/// 
/// This function provides compatibility with pthread_spin_lock().
/// 
/// # Arguments
/// * `spinlock` - Spinlock to lock
/// 
/// # Returns
/// * `PosixResult<()>` - Success on lock, error on failure
pub fn spin_lock(spinlock: &pthread_spinlock_t) -> PosixResult<()> {
    if spinlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would lock the spinlock
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Try to lock a spinlock
/// 
/// This function provides compatibility with pthread_spin_trylock().
/// 
/// # Arguments
/// * `spinlock` - Spinlock to try to lock
/// 
/// # Returns
/// * `PosixResult<()>` - Success on lock, error on failure
pub fn spin_trylock(spinlock: &pthread_spinlock_t) -> PosixResult<()> {
    if spinlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would try to lock the spinlock
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Unlock a spinlock
/// 
/// This function provides compatibility with pthread_spin_unlock().
/// 
/// # Arguments
/// * `spinlock` - Spinlock to unlock
/// 
/// # Returns
/// * `PosixResult<()>` - Success on unlock, error on failure
pub fn spin_unlock(spinlock: &pthread_spinlock_t) -> PosixResult<()> {
    if spinlock.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would unlock the spinlock
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Initialize one-time initialization
/// 
/// This function provides compatibility with pthread_once().
/// 
/// # Arguments
/// * `once_control` - One-time initialization control
/// * `init_routine` - Initialization routine to call once
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn once(once_control: &mut pthread_once_t, init_routine: fn()) -> PosixResult<()> {
    if once_control.is_null() || init_routine.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would perform one-time initialization
    // For now, just call the init routine and mark as initialized
    init_routine();
    *once_control = 1;
    Ok(())
}

/// Create a key for thread-specific data
/// 
/// This function provides compatibility with pthread_key_create().
/// 
/// # Arguments
/// * `key` - Pointer to store key
/// * `destructor` - Destructor function for thread-specific data (NULL for none)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on creation, error on failure
pub fn key_create(key: &mut pthread_key_t, destructor: Option<fn(*mut u8)>) -> PosixResult<()> {
    if key.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would create a thread-specific data key
    *key = 1;
    Ok(())
}

/// Delete a key for thread-specific data
/// 
/// This function provides compatibility with pthread_key_delete().
/// 
/// # Arguments
/// * `key` - Key to delete
/// 
/// # Returns
/// * `PosixResult<()>` - Success on deletion, error on failure
pub fn key_delete(key: pthread_key_t) -> PosixResult<()> {
    if key == 0 {
        return Err(Errno::Einval);
    }
    
    // In a real implementation, this would delete the thread-specific data key
    Ok(())
}

/// Set thread-specific data
/// 
/// This function provides compatibility with pthread_setspecific().
/// 
/// # Arguments
/// * `key` - Key to set data for
/// * `value` - Value to associate with key
/// 
/// # Returns
/// * `PosixResult<()>` - Success on set, error on failure
pub fn setspecific(key: pthread_key_t, value: *const u8) -> PosixResult<()> {
    if key == 0 {
        return Err(Errno::Einval);
    }
    
    // In a real implementation, this would set thread-specific data
    Ok(())
}

/// Get thread-specific data
/// 
/// This function provides compatibility with pthread_getspecific().
/// 
/// # Arguments
/// * `key` - Key to get data for
/// 
/// # Returns
/// * `PosixResult<*mut u8>` - Associated value, error on failure
pub fn getspecific(key: pthread_key_t) -> PosixResult<*mut u8> {
    if key == 0 {
        return Err(Errno::Einval);
    }
    
    // In a real implementation, this would get thread-specific data
    // For now, return null
    Ok(core::ptr::null_mut())
}

/// Thread utility functions and helpers
pub mod utils {
    use super::*;
    
    /// Check if a thread ID is valid
    pub fn is_valid_thread_id(thread: pthread_t) -> bool {
        thread != 0
    }
    
    /// Get thread priority
    pub fn get_thread_priority(thread: pthread_t) -> PosixResult<i32> {
        if !is_valid_thread_id(thread) {
            return Err(Errno::Einval);
        }
        
        // In a real implementation, this would get the thread priority
        // For now, return not implemented
        Err(Errno::Enosys)
    }
    
    /// Set thread priority
    pub fn set_thread_priority(thread: pthread_t, priority: i32) -> PosixResult<()> {
        if !is_valid_thread_id(thread) || priority < 0 {
            return Err(Errno::Einval);
        }
        
        // In a real implementation, this would set the thread priority
        Err(Errno::Enosys)
    }
    
    /// Get thread scheduling policy
    pub fn get_thread_schedpolicy(thread: pthread_t) -> PosixResult<SchedPolicy> {
        if !is_valid_thread_id(thread) {
            return Err(Errno::Einval);
        }
        
        // In a real implementation, this would get the scheduling policy
        Err(Errno::Enosys)
    }
    
    /// Set thread scheduling policy
    pub fn set_thread_schedpolicy(thread: pthread_t, policy: SchedPolicy) -> PosixResult<()> {
        if !is_valid_thread_id(thread) {
            return Err(Errno::Einval);
        }
        
        // In a real implementation, this would set the scheduling policy
        Err(Errno::Enosys)
    }
    
    /// Check if thread is detached
    pub fn is_thread_detached(thread: pthread_t) -> PosixResult<bool> {
        if !is_valid_thread_id(thread) {
            return Err(Errno::Einval);
        }
        
        // In a real implementation, this would check if thread is detached
        // For now, return false (not detached)
        Ok(false)
    }
    
    /// Get thread stack information
    pub fn get_thread_stack(thread: pthread_t) -> PosixResult<ThreadStack> {
        if !is_valid_thread_id(thread) {
            return Err(Errno::Einval);
        }
        
        // In a real implementation, this would get thread stack info
        Err(Errno::Enosys)
    }
    
    /// Check if thread has been cancelled
    pub fn is_thread_cancelled(thread: pthread_t) -> PosixResult<bool> {
        if !is_valid_thread_id(thread) {
            return Err(Errno::Einval);
        }
        
        // In a real implementation, this would check if thread was cancelled
        Ok(false)
    }
    
    /// Yield the CPU
    pub fn yield_now() -> PosixResult<()> {
        // In a real implementation, this would call sched_yield
        // For now, return not implemented
        Err(Errno::Enosys)
    }
    
    /// Get number of processors
    pub fn get_num_processors() -> PosixResult<i32> {
        // In a real implementation, this would get the number of processors
        // For now, return a default value
        Ok(1)
    }
    
    /// Create a scoped thread with automatic cleanup
    pub fn scoped<F, T>(f: F) -> PosixResult<pthread_t>
    where
        F: FnOnce() -> PosixResult<T>,
        T: Send + Sync,
    {
        // In a real implementation, this would create a scoped thread
        // For now, return not implemented
        Err(Errno::Enosys)
    }
    
    /// Create a thread pool
    pub fn create_thread_pool(size: usize) -> PosixResult<ThreadPool> {
        if size == 0 {
            return Err(Errno::Einval);
        }
        
        // In a real implementation, this would create a thread pool
        Err(Errno::Enosys)
    }
}

/// Thread pool structure
#[derive(Debug)]
pub struct ThreadPool {
    size: usize,
    threads: Vec<pthread_t>,
}

/// Thread safety attributes
pub mod safety {
    use super::*;
    
    /// Check if a function is thread-safe
    pub fn is_thread_safe<T: Send + Sync>() -> bool {
        true
    }
    
    /// Check if a function is reentrant (can be called from signal handlers)
    pub fn is_reentrant() -> bool {
        false // Most pthread functions are not reentrant
    }
    
    /// Check if a data structure is thread-local
    pub fn is_thread_local<T: Send + Sync>() -> bool {
        true
    }
    
    /// Get thread-local storage key
    pub fn get_tls_key() -> PosixResult<pthread_key_t> {
        let mut key = 0;
        key_create(&mut key, None)?;
        Ok(key)
    }
    
    /// Set thread-local storage
    pub fn set_tls(key: pthread_key_t, value: *const u8) -> PosixResult<()> {
        setspecific(key, value)
    }
    
    /// Get thread-local storage
    pub fn get_tls(key: pthread_key_t) -> PosixResult<*mut u8> {
        getspecific(key)
    }
}

/// Constants for thread attributes
pub const PTHREAD_CREATE_JOINABLE: DetachState = DetachState::Joinable;
pub const PTHREAD_CREATE_DETACHED: DetachState = DetachState::Detached;

/// Constants for mutex types
pub const PTHREAD_MUTEX_NORMAL: MutexType = MutexType::Normal;
pub const PTHREAD_MUTEX_ERRORCHECK: MutexType = MutexType::ErrorCheck;
pub const PTHREAD_MUTEX_RECURSIVE: MutexType = MutexType::Recursive;
pub const PTHREAD_MUTEX_DEFAULT: MutexType = MutexType::Default;

/// Constants for mutex protocols
pub const PTHREAD_PRIO_NONE: MutexProtocol = MutexProtocol::None;
pub const PTHREAD_PRIO_INHERIT: MutexProtocol = MutexProtocol::Priority;
pub const PTHREAD_PRIO_PROTECT: MutexProtocol = MutexProtocol::PriorityProtect;

/// Constants for robust mutexes
pub const PTHREAD_MUTEX_STALLED: MutexRobust = MutexRobust::NonRobust;
pub const PTHREAD_MUTEX_ROBUST: MutexRobust = MutexRobust::Robust;

/// Constants for condition variable attributes
pub const PTHREAD_PROCESS_PRIVATE: CondPShared = CondPShared::Private;
pub const PTHREAD_PROCESS_SHARED: CondPShared = CondPShared::Shared;

/// Constants for read-write lock attributes
pub const PTHREAD_RWLOCK_PREFER_READER_NP: RWLockPShared = RWLockPShared::Private;
pub const PTHREAD_RWLOCK_PREFER_WRITER_NP: RWLockPShared = RWLockPShared::Private;

/// Constants for barrier attributes
pub const PTHREAD_BARRIER_SERIAL_THREAD: BarrierPShared = BarrierPShared::Private;

/// Constants for spinlock attributes
pub const PTHREAD_SPINLOCK_ADAPTIVE_NP: SpinLockPShared = SpinLockPShared::Private;
pub const PTHREAD_SPINLOCK_TIMED_NP: SpinLockPShared = SpinLockPShared::Private;

/// Thread scope constants
pub const PTHREAD_SCOPE_SYSTEM: ThreadScope = ThreadScope::System;
pub const PTHREAD_SCOPE_PROCESS: ThreadScope = ThreadScope::Process;

/// Scheduling policy constants
pub const SCHED_OTHER: SchedPolicy = SchedPolicy::Other;
pub const SCHED_FIFO: SchedPolicy = SchedPolicy::Fifo;
pub const SCHED_RR: SchedPolicy = SchedPolicy::RoundRobin;
pub const SCHED_BATCH: SchedPolicy = SchedPolicy::Batch;
pub const SCHED_IDLE: SchedPolicy = SchedPolicy::Idle;
pub const SCHED_DEADLINE: SchedPolicy = SchedPolicy::Deadline;

/// Minimum and maximum scheduling priorities
pub const PRIO_MIN: i32 = 0;
pub const PRIO_MAX: i32 = 99;

/// One-time initialization constant
pub const PTHREAD_ONCE_INIT: pthread_once_t = 0;

/// Thread-specific data key maximum
pub const PTHREAD_KEYS_MAX: i32 = 1024;

/// Thread stack size minimum
pub const PTHREAD_STACK_MIN: usize = 16384;

/// Threads maximum
pub const PTHREAD_THREADS_MAX: i32 = -1; // No limit
