//! POSIX signal.h Compatibility
//! 
//! This module provides comprehensive signal.h compatibility for MultiOS,
//! including signal handling, masking, and signal set operations while
//! maintaining Rust safety guarantees.

use crate::errors::*;
use crate::internal::*;
use crate::types::*;
use crate::syscall;
use core::ffi;

/// Signal handler type
pub type sighandler_t = usize;

/// Signal mask type (platform-dependent)
pub type sigset_t = u64;

/// Signal flag type
pub type sigflag_t = i32;

/// Signal delivery flags
pub type sigflag_mask_t = u32;

/// Signal action structure
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sigaction {
    pub sa_handler: sighandler_t,    // Signal handler
    pub sa_mask: sigset_t,           // Signal mask to block during handler
    pub sa_flags: i32,               // Signal handling flags
    pub sa_restorer: usize,          // Signal restorer function
}

/// Signal information structure
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct siginfo {
    pub si_signo: i32,               // Signal number
    pub si_code: i32,                // Signal code
    pub si_errno: i32,               // Error number
    pub si_addr: usize,              // Faulting address
    pub si_band: i64,                // Band event (for SIGPOLL)
    pub si_fd: i32,                  // File descriptor (for SIGPOLL)
    pub si_timer1: i32,              // Timer ID (for real-time signals)
    pub si_timer2: i32,              // Timer ID (for real-time signals)
    pub si_uid: uid_t,               // Real user ID
    pub si_pid: pid_t,               // Real process ID
}

/// Signal stack structure
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sigstack {
    pub ss_sp: usize,                // Signal stack pointer
    pub ss_onstack: i32,             // 1 if process is on stack
}

/// Signal context structure (architecture-dependent)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sigcontext {
    pub sc_pc: usize,                // Program counter
    pub sc_regs: [usize; 32],        // General purpose registers
    pub sc_fpregs: [u64; 32],        // Floating point registers
    pub sc_flags: u32,               // Context flags
}

/// Real-time signal structure
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sigevent {
    pub sigev_notify: i32,           // Notification method
    pub sigev_signo: i32,            // Signal number
    pub sigev_value: u64,            // Signal value
    pub sigev_notify_function: usize, // Notification function
    pub sigev_notify_attributes: usize, // Notification attributes
    pub _data: [u64; 2],             // Additional data (union)
}

/// Signal set operations
#[macro_export]
macro_rules! sigemptyset {
    ($set:expr) => {
        *$set = 0;
    };
}

#[macro_export]
macro_rules! sigfillset {
    ($set:expr) => {
        *$set = !$crate::types::sigset_t::MAX;
    };
}

#[macro_export]
macro_rules! sigaddset {
    ($set:expr, $signo:expr) => {
        *$set |= 1 << ($signo - 1);
    };
}

#[macro_export]
macro_rules! sigdelset {
    ($set:expr, $signo:expr) => {
        *$set &= !(1 << ($signo - 1));
    };
}

#[macro_export]
macro_rules! sigismember {
    ($set:expr, $signo:expr) -> bool {
        (*$set & (1 << ($signo - 1))) != 0
    };
}

/// Initialize an empty signal set
/// 
/// This function provides compatibility with the POSIX sigemptyset() function.
/// 
/// # Arguments
/// * `set` - Pointer to signal set to initialize
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn sigemptyset(set: &mut sigset_t) -> PosixResult<()> {
    *set = 0;
    Ok(())
}

/// Initialize a full signal set
/// 
/// This function provides compatibility with the POSIX sigfillset() function.
/// 
/// # Arguments
/// * `set` - Pointer to signal set to initialize
/// 
/// # Returns
/// * `PosixResult<()>` - Success on initialization, error on failure
pub fn sigfillset(set: &mut sigset_t) -> PosixResult<()> {
    *set = !0;
    Ok(())
}

/// Add a signal to a signal set
/// 
/// This function provides compatibility with the POSIX sigaddset() function.
/// 
/// # Arguments
/// * `set` - Pointer to signal set
/// * `signo` - Signal number to add
/// 
/// # Returns
/// * `PosixResult<()>` - Success on add, error on failure
pub fn sigaddset(set: &mut sigset_t, signo: i32) -> PosixResult<()> {
    if signo <= 0 || signo > 64 {
        return Err(Errno::Einval);
    }
    
    *set |= 1 << (signo - 1);
    Ok(())
}

/// Remove a signal from a signal set
/// 
/// This function provides compatibility with the POSIX sigdelset() function.
/// 
/// # Arguments
/// * `set` - Pointer to signal set
/// * `signo` - Signal number to remove
/// 
/// # Returns
/// * `PosixResult<()>` - Success on delete, error on failure
pub fn sigdelset(set: &mut sigset_t, signo: i32) -> PosixResult<()> {
    if signo <= 0 || signo > 64 {
        return Err(Errno::Einval);
    }
    
    *set &= !(1 << (signo - 1));
    Ok(())
}

/// Check if a signal is a member of a signal set
/// 
/// This function provides compatibility with the POSIX sigismember() function.
/// 
/// # Arguments
/// * `set` - Pointer to signal set
/// * `signo` - Signal number to check
/// 
/// # Returns
/// * `PosixResult<bool>` - True if signal is in set, false if not, error on failure
pub fn sigismember(set: &sigset_t, signo: i32) -> PosixResult<bool> {
    if signo <= 0 || signo > 64 {
        return Err(Errno::Einval);
    }
    
    Ok((*set & (1 << (signo - 1))) != 0)
}

/// Set up signal action
/// 
/// This function provides compatibility with the POSIX sigaction() function.
/// 
/// # Arguments
/// * `signo` - Signal number
/// * `act` - Pointer to new sigaction structure (NULL to ignore)
/// * `oldact` - Pointer to store old sigaction structure (NULL to ignore)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on sigaction, error on failure
pub fn sigaction(signo: i32, act: Option<&sigaction>, oldact: Option<&mut sigaction>) -> PosixResult<()> {
    // In a real implementation, this would call syscall::rt_sigaction
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get or change signal mask
/// 
/// This function provides compatibility with the POSIX sigprocmask() function.
/// 
/// # Arguments
/// * `how` - How to change the mask (SIG_BLOCK, SIG_UNBLOCK, SIG_SETMASK)
/// * `set` - Pointer to new signal mask (NULL to ignore)
/// * `oldset` - Pointer to store old signal mask (NULL to ignore)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on sigprocmask, error on failure
pub fn sigprocmask(how: i32, set: Option<&sigset_t>, oldset: Option<&mut sigset_t>) -> PosixResult<()> {
    // In a real implementation, this would call syscall::rt_sigprocmask
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Examine pending signals
/// 
/// This function provides compatibility with the POSIX sigpending() function.
/// 
/// # Arguments
/// * `set` - Pointer to signal set to store pending signals
/// 
/// # Returns
/// * `PosixResult<()>` - Success on sigpending, error on failure
pub fn sigpending(set: &mut sigset_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::rt_sigpending
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Wait for a signal
/// 
/// This function provides compatibility with the POSIX sigsuspend() function.
/// 
/// # Arguments
/// * `sigmask` - Pointer to signal mask to restore after signal
/// 
/// # Returns
/// * `PosixResult<()>` - Success on sigsuspend, error on failure
pub fn sigsuspend(sigmask: Option<&sigset_t>) -> PosixResult<()> {
    // In a real implementation, this would call syscall::rt_sigsuspend
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Wait for a signal with timeout
/// 
/// This function provides compatibility with the POSIX sigtimedwait() function.
/// 
/// # Arguments
/// * `set` - Pointer to signal set to wait for
/// * `info` - Pointer to signal information structure
/// * `timeout` - Pointer to timeout structure
/// 
/// # Returns
/// * `PosixResult<i32>` - Signal number received, error on failure
pub fn sigtimedwait(set: &sigset_t, info: Option<&mut siginfo>, timeout: Option<&timespec>) -> PosixResult<i32> {
    // In a real implementation, this would call syscall::rt_sigtimedwait
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Send a signal to a thread
/// 
/// This function provides compatibility with the POSIX sigqueue() function.
/// 
/// # Arguments
/// * `pid` - Process ID
/// * `tid` - Thread ID
/// * `signo` - Signal number
/// * `value` - Signal value
/// 
/// # Returns
/// * `PosixResult<()>` - Success on sigqueue, error on failure
pub fn sigqueue(pid: pid_t, tid: pid_t, signo: i32, value: u64) -> PosixResult<()> {
    // In a real implementation, this would call syscall::rt_sigqueueinfo
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set up alternative signal stack
/// 
/// This function provides compatibility with the POSIX sigaltstack() function.
/// 
/// # Arguments
/// * `ss` - Pointer to new signal stack (NULL to get current)
/// * `oss` - Pointer to store old signal stack (NULL to ignore)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on sigaltstack, error on failure
pub fn sigaltstack(ss: Option<&sigstack>, oss: Option<&mut sigstack>) -> PosixResult<()> {
    // In a real implementation, this would call syscall::sigaltstack
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Install signal handler (simplified interface)
/// 
/// This function provides a simplified interface for installing signal handlers.
/// 
/// # Arguments
/// * `signo` - Signal number
/// * `handler` - Signal handler function
/// 
/// # Returns
/// * `PosixResult<sighandler_t>` - Old signal handler, error on failure
pub fn signal(signo: i32, handler: sighandler_t) -> PosixResult<sighandler_t> {
    let act = sigaction {
        sa_handler: handler,
        sa_mask: 0,
        sa_flags: 0,
        sa_restorer: 0,
    };
    
    let mut oldact = sigaction {
        sa_handler: 0,
        sa_mask: 0,
        sa_flags: 0,
        sa_restorer: 0,
    };
    
    sigaction(signo, Some(&act), Some(&mut oldact))?;
    Ok(oldact.sa_handler)
}

/// Set up real-time signal handling
/// 
/// This function provides compatibility with the POSIX sigevent() function.
/// 
/// # Arguments
/// * `ev` - Pointer to sigevent structure
/// * `timerid` - Pointer to timer ID
/// * `osev` - Pointer to old sigevent structure (NULL to ignore)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on sigevent, error on failure
pub fn timer_create(clockid: clockid_t, ev: &sigevent, timerid: *mut timer_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::timer_create
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Delete a timer
/// 
/// This function provides compatibility with the POSIX timer_delete() function.
/// 
/// # Arguments
/// * `timerid` - Timer ID
/// 
/// # Returns
/// * `PosixResult<()>` - Success on timer delete, error on failure
pub fn timer_delete(timerid: timer_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::timer_delete
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get timer overruns
/// 
/// This function provides compatibility with the POSIX timer_getoverrun() function.
/// 
/// # Arguments
/// * `timerid` - Timer ID
/// 
/// # Returns
/// * `PosixResult<i32>` - Number of overruns, error on failure
pub fn timer_getoverrun(timerid: timer_t) -> PosixResult<i32> {
    // In a real implementation, this would call syscall::timer_getoverrun
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get timer expiration
/// 
/// This function provides compatibility with the POSIX timer_gettime() function.
/// 
/// # Arguments
/// * `timerid` - Timer ID
/// * `value` - Pointer to itimerspec structure
/// 
/// # Returns
/// * `PosixResult<()>` - Success on timer gettime, error on failure
pub fn timer_gettime(timerid: timer_t, value: &mut itimerspec) -> PosixResult<()> {
    // In a real implementation, this would call syscall::timer_gettime
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set timer expiration
/// 
/// This function provides compatibility with the POSIX timer_settime() function.
/// 
/// # Arguments
/// * `timerid` - Timer ID
/// * `flags` - Timer flags
/// * `value` - Pointer to itimerspec structure
/// * `ovalue` - Pointer to old itimerspec structure (NULL to ignore)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on timer settime, error on failure
pub fn timer_settime(timerid: timer_t, flags: i32, value: &itimerspec, ovalue: Option<&mut itimerspec>) -> PosixResult<()> {
    // In a real implementation, this would call syscall::timer_settime
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Advanced signal handling utilities
/// 
/// These functions provide advanced signal handling capabilities.
pub mod advanced {
    use super::*;
    
    /// Block a set of signals temporarily
    /// 
    /// This function provides a safe way to temporarily block signals
    /// during critical sections of code.
    /// 
    /// # Arguments
    /// * `signals` - Signals to block
    /// * `f` - Function to execute while signals are blocked
    /// 
    /// # Returns
    /// * `Result<T, Errno>` - Result of the function or error
    pub fn with_blocked_signals<T, F>(signals: sigset_t, f: F) -> PosixResult<T>
    where
        F: FnOnce() -> PosixResult<T>,
    {
        let mut old_mask = 0;
        
        // Save current signal mask
        super::sigprocmask(SIG_BLOCK, Some(&signals), Some(&mut old_mask))?;
        
        // Execute function with signals blocked
        let result = f();
        
        // Restore original signal mask
        let _ = super::sigprocmask(SIG_SETMASK, Some(&old_mask), None);
        
        result
    }
    
    /// Wait for specific signals
    /// 
    /// This function provides a safe way to wait for specific signals
    /// while ensuring proper signal handling.
    /// 
    /// # Arguments
    /// * `signals` - Signals to wait for
    /// * `timeout` - Maximum time to wait (None for no timeout)
    /// 
    /// # Returns
    /// * `PosixResult<i32>` - Signal number received or timeout
    pub fn wait_for_signals(signals: sigset_t, timeout: Option<&timespec>) -> PosixResult<i32> {
        super::sigtimedwait(&signals, None, timeout)
    }
    
    /// Send signal with payload
    /// 
    /// This function provides a safe way to send signals with additional
    /// data using real-time signals.
    /// 
    /// # Arguments
    /// * `pid` - Process ID
    /// * `tid` - Thread ID
    /// * `signo` - Signal number
    /// * `data` - Data to send with signal
    /// 
    /// # Returns
    /// * `PosixResult<()>` - Success on signal send
    pub fn send_signal_with_data(pid: pid_t, tid: pid_t, signo: i32, data: u64) -> PosixResult<()> {
        super::sigqueue(pid, tid, signo, data)
    }
    
    /// Create a signal handler that ignores the signal
    /// 
    /// # Arguments
    /// * `signo` - Signal number
    /// 
    /// # Returns
    /// * `PosixResult<()>` - Success on ignore setup
    pub fn ignore_signal(signo: i32) -> PosixResult<()> {
        let act = sigaction {
            sa_handler: SIG_IGN,
            sa_mask: 0,
            sa_flags: 0,
            sa_restorer: 0,
        };
        
        super::sigaction(signo, Some(&act), None)
    }
    
    /// Set up signal handler with cleanup
    /// 
    /// This function sets up a signal handler that automatically
    /// restores the previous handler when it completes.
    /// 
    /// # Arguments
    /// * `signo` - Signal number
    /// * `handler` - New signal handler
    /// 
    /// # Returns
    /// * `PosixResult<Box<dyn FnOnce()>>` - Cleanup function to restore old handler
    pub fn with_signal_handler<F>(signo: i32, handler: F) -> PosixResult<Box<dyn FnOnce()>>
    where
        F: Fn(i32),
    {
        let mut old_action = sigaction {
            sa_handler: 0,
            sa_mask: 0,
            sa_flags: 0,
            sa_restorer: 0,
        };
        
        let new_action = sigaction {
            sa_handler: handler as usize,
            sa_mask: 0,
            sa_flags: SA_SIGINFO,
            sa_restorer: 0,
        };
        
        super::sigaction(signo, Some(&new_action), Some(&mut old_action))?;
        
        let old_handler = old_action.sa_handler;
        Ok(Box::new(move || {
            let _ = super::signal(signo, old_handler);
        }))
    }
}

/// Signal handling constants
/// 
/// These constants define standard signal handling behaviors.

/// Default signal action
pub const SIG_DFL: sighandler_t = 0;

/// Ignore signal
pub const SIG_IGN: sighandler_t = 1;

/// Error indicator for signal handler setup
pub const SIG_ERR: sighandler_t = !0;

/// Signal mask operations
pub const SIG_BLOCK: i32 = 0;      // Add signals to current mask
pub const SIG_UNBLOCK: i32 = 1;    // Remove signals from current mask
pub const SIG_SETMASK: i32 = 2;    // Replace current mask

/// Signal action flags
pub const SA_NOCLDSTOP: i32 = 0x00000001;    // Don't generate SIGCHLD on child stop
pub const SA_NOCLDWAIT: i32 = 0x00000002;    // Don't create zombie processes
pub const SA_SIGINFO: i32 = 0x00000004;      // Signal handler takes 3 arguments
pub const SA_ONSTACK: i32 = 0x08000000;      // Use alternate signal stack
pub const SA_RESTART: i32 = 0x10000000;      // Restart interrupted system calls
pub const SA_NODEFER: i32 = 0x40000000;      // Don't mask signal during handler

/// Signal delivery methods for timer_create
pub const SIGEV_SIGNAL: i32 = 0;             // Notify via signal
pub const SIGEV_NONE: i32 = 1;               // No notification
pub const SIGEV_THREAD: i32 = 2;             // Notify via thread

/// Signal code values for different types of signals
pub const SI_USER: i32 = 0;                  // Signal from user process
pub const SI_KERNEL: i32 = 0x80;             // Signal from kernel
pub const SI_QUEUE: i32 = -1;                // Signal from sigqueue
pub const SI_TIMER: i32 = -2;                // Signal from timer
pub const SI_MESGQ: i32 = -3;                // Signal from message queue

/// Platform-specific signal stack flags
pub const SS_ONSTACK: i32 = 1;               // Process is on signal stack
pub const SS_DISABLE: i32 = 2;               // Signal stack disabled

/// Signal context flags
pub const CONTEXT_SIGMASK: u32 = 0x0001;     // Signal mask changed
pub const CONTEXT_MCONTEXT: u32 = 0x0002;    // Machine context changed

/// Signal-related error conditions
pub mod errors {
    use super::*;
    
    /// Check if an error indicates a signal was caught
    pub fn is_signal_error(errno: Errno) -> bool {
        matches!(errno, Errno::Eintr)
    }
    
    /// Check if an error indicates a signal was pending
    pub fn is_signal_pending(errno: Errno) -> bool {
        matches!(errno, Errno::Eintr)
    }
    
    /// Check if an error indicates signal handling failed
    pub fn is_signal_failure(errno: Errno) -> bool {
        matches!(errno, Errno::Einval | Errno::Eintr | Errno::Eperm)
    }
    
    /// Get human-readable description of signal error
    pub fn signal_error_description(errno: Errno) -> &'static str {
        match errno {
            Errno::Einval => "Invalid signal number or parameters",
            Errno::Eintr => "Signal caught during system call",
            Errno::Eperm => "Insufficient permissions for signal operation",
            _ => "Unknown signal error",
        }
    }
}

/// Signal utility functions
pub mod utils {
    use super::*;
    
    /// Check if a signal number is valid
    pub fn is_valid_signal(signo: i32) -> bool {
        signo >= 1 && signo <= 64
    }
    
    /// Check if a signal is maskable
    pub fn is_maskable_signal(signo: i32) -> bool {
        matches!(signo, 
            1..=31 | // Standard signals (except SIGKILL and SIGSTOP)
            32..=64    // Real-time signals
        )
    }
    
    /// Check if a signal can be caught
    pub fn is_catchable_signal(signo: i32) -> bool {
        matches!(signo, 
            1..=31 | // All standard signals
            32..=64    // Real-time signals
        ) && !matches!(signo, 9 | 19 | 20 | 17..=18) // Except SIGKILL, SIGSTOP, SIGTSTP, SIGTTIN, SIGTTOU, SIGCHLD
    }
    
    /// Get signal name from number
    pub fn signal_name(signo: i32) -> &'static str {
        match signo {
            1 => "SIGHUP",
            2 => "SIGINT",
            3 => "SIGQUIT",
            4 => "SIGILL",
            5 => "SIGTRAP",
            6 => "SIGABRT",
            7 => "SIGBUS",
            8 => "SIGFPE",
            9 => "SIGKILL",
            10 => "SIGUSR1",
            11 => "SIGSEGV",
            12 => "SIGUSR2",
            13 => "SIGPIPE",
            14 => "SIGALRM",
            15 => "SIGTERM",
            16 => "SIGSTKFLT",
            17 => "SIGCHLD",
            18 => "SIGCONT",
            19 => "SIGSTOP",
            20 => "SIGTSTP",
            21 => "SIGTTIN",
            22 => "SIGTTOU",
            23 => "SIGURG",
            24 => "SIGXCPU",
            25 => "SIGXFSZ",
            26 => "SIGVTALRM",
            27 => "SIGPROF",
            28 => "SIGWINCH",
            29 => "SIGIO",
            30 => "SIGPWR",
            31 => "SIGSYS",
            _ if signo >= 32 && signo <= 64 => "SIGRTMIN+signo-32",
            _ => "UNKNOWN",
        }
    }
    
    /// Create a signal mask from multiple signals
    pub fn create_signal_mask(signals: &[i32]) -> sigset_t {
        let mut mask: sigset_t = 0;
        for &signo in signals {
            if is_valid_signal(signo) {
                mask |= 1 << (signo - 1);
            }
        }
        mask
    }
    
    /// Extract signals from a signal mask
    pub fn extract_signals_from_mask(mask: sigset_t) -> Vec<i32> {
        let mut signals = Vec::new();
        for i in 1..=64 {
            if (mask & (1 << (i - 1))) != 0 {
                signals.push(i);
            }
        }
        signals
    }
}
