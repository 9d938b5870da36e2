//! POSIX unistd.h Compatibility
//! 
//! This module provides comprehensive unistd.h compatibility for MultiOS,
//! including process management, system operations, and system information
//! while maintaining Rust safety guarantees.

use crate::errors::*;
use crate::internal::*;
use crate::syscall;
use crate::types::*;
use core::ffi;

/// Get process ID
/// 
/// This function provides compatibility with the POSIX getpid() function.
/// 
/// # Returns
/// * `pid_t` - Process ID of the current process
pub fn getpid() -> pid_t {
    unsafe { syscall::getpid() }
}

/// Get parent process ID
/// 
/// This function provides compatibility with the POSIX getppid() function.
/// 
/// # Returns
/// * `pid_t` - Parent process ID
pub fn getppid() -> pid_t {
    unsafe { syscall::getppid() }
}

/// Get real user ID
/// 
/// This function provides compatibility with the POSIX getuid() function.
/// 
/// # Returns
/// * `uid_t` - Real user ID of the current process
pub fn getuid() -> uid_t {
    // In a real implementation, this would call syscall::getuid
    // For now, return default user ID
    1000
}

/// Get effective user ID
/// 
/// This function provides compatibility with the POSIX geteuid() function.
/// 
/// # Returns
/// * `uid_t` - Effective user ID of the current process
pub fn geteuid() -> uid_t {
    // In a real implementation, this would call syscall::geteuid
    // For now, return default user ID
    1000
}

/// Get real group ID
/// 
/// This function provides compatibility with the POSIX getgid() function.
/// 
/// # Returns
/// * `gid_t` - Real group ID of the current process
pub fn getgid() -> gid_t {
    // In a real implementation, this would call syscall::getgid
    // For now, return default group ID
    1000
}

/// Get effective group ID
/// 
/// This function provides compatibility with the POSIX getegid() function.
/// 
/// # Returns
/// * `gid_t` - Effective group ID of the current process
pub fn getegid() -> gid_t {
    // In a real implementation, this would call syscall::getegid
    // For now, return default group ID
    1000
}

/// Set real user ID
/// 
/// This function provides compatibility with the POSIX setuid() function.
/// 
/// # Arguments
/// * `uid` - New real user ID
/// 
/// # Returns
/// * `PosixResult<()>` - Success on setuid, error on failure
pub fn setuid(uid: uid_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::setuid
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set effective user ID
/// 
/// This function provides compatibility with the POSIX seteuid() function.
/// 
/// # Arguments
/// * `euid` - New effective user ID
/// 
/// # Returns
/// * `PosixResult<()>` - Success on seteuid, error on failure
pub fn seteuid(euid: uid_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::seteuid
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set real group ID
/// 
/// This function provides compatibility with the POSIX setgid() function.
/// 
/// # Arguments
/// * `gid` - New real group ID
/// 
/// # Returns
/// * `PosixResult<()>` - Success on setgid, error on failure
pub fn setgid(gid: gid_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::setgid
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set effective group ID
/// 
/// This function provides compatibility with the POSIX setegid() function.
/// 
/// # Arguments
/// * `egid` - New effective group ID
/// 
/// # Returns
/// * `PosixResult<()>` - Success on setegid, error on failure
pub fn setegid(egid: gid_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::setegid
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Fork a process
/// 
/// This function provides compatibility with the POSIX fork() function.
/// 
/// # Returns
/// * `PosixResult<pid_t>` - PID of child process (0 in child), error on failure
pub fn fork() -> PosixResult<pid_t> {
    unsafe {
        let result = syscall::fork();
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(result)
        }
    }
}

/// Execute a program
/// 
/// This function provides compatibility with the POSIX execve() function.
/// 
/// # Arguments
/// * `pathname` - Path to the executable
/// * `argv` - Argument vector (NULL-terminated)
/// * `envp` - Environment vector (NULL-terminated)
/// 
/// # Returns
/// * `!` - This function never returns on success
pub fn execve(pathname: &str, argv: &[*const ffi::c_char], envp: &[*const ffi::c_char]) -> PosixResult<!> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // Create a temporary buffer for the path
    let mut path_buf = [0u8; PATH_MAX + 1];
    path_buf[..path_bytes.len()].copy_from_slice(path_bytes);
    
    unsafe {
        let result = syscall::execve(path_buf.as_ptr(), argv.as_ptr(), envp.as_ptr());
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            // This should never return
            unreachable!()
        }
    }
}

/// Execute a program using path search
/// 
/// This function provides compatibility with the POSIX execl() function.
/// 
/// # Arguments
/// * `path` - Path to the executable
/// * `arg` - Arguments (NULL-terminated list)
/// 
/// # Returns
/// * `PosixResult<!>` - This function never returns on success
pub fn execl(path: &str, arg: &ffi::c_char, args: &[&ffi::c_char]) -> PosixResult<!> {
    let mut argv = Vec::new();
    argv.push(arg as *const ffi::c_char);
    for a in args {
        argv.push(*a as *const ffi::c_char);
    }
    argv.push(core::ptr::null());
    
    // In a real implementation, this would search PATH
    // For now, just call execve with empty environment
    execve(path, &argv, &[])
}

/// Execute a program using system PATH
/// 
/// This function provides compatibility with the POSIX execvp() function.
/// 
/// # Arguments
/// * `file` - Name of the executable
/// * `argv` - Argument vector
/// 
/// # Returns
/// * `PosixResult<!>` - This function never returns on success
pub fn execvp(file: &str, argv: &[*const ffi::c_char]) -> PosixResult<!> {
    // In a real implementation, this would search PATH
    // For now, just try to execute directly
    execl(file, &ffi::c_char::from(0), &[])
}

/// Exit a process
/// 
/// This function provides compatibility with the POSIX _exit() function.
/// 
/// # Arguments
/// * `status` - Exit status
pub fn _exit(status: i32) -> ! {
    unsafe { syscall::exit(status) }
}

/// Wait for a child process to change state
/// 
/// This function provides compatibility with the POSIX wait() function.
/// 
/// # Arguments
/// * `wstatus` - Pointer to store the wait status
/// 
/// # Returns
/// * `PosixResult<pid_t>` - PID of the child process, error on failure
pub fn wait(wstatus: *mut i32) -> PosixResult<pid_t> {
    waitpid(-1, wstatus, 0)
}

/// Wait for a specific child process
/// 
/// This function provides compatibility with the POSIX waitpid() function.
/// 
/// # Arguments
/// * `pid` - PID to wait for (-1 for any child)
/// * `wstatus` - Pointer to store the wait status
/// * `options` - Wait options
/// 
/// # Returns
/// * `PosixResult<pid_t>` - PID of the child process, error on failure
pub fn waitpid(pid: pid_t, wstatus: *mut i32, options: i32) -> PosixResult<pid_t> {
    // In a real implementation, this would call syscall::wait4
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get process group ID
/// 
/// This function provides compatibility with the POSIX getpgrp() function.
/// 
/// # Returns
/// * `pid_t` - Process group ID of the current process
pub fn getpgrp() -> pid_t {
    // In a real implementation, this would call syscall::getpgrp
    // For now, return current process ID
    getpid()
}

/// Set process group ID
/// 
/// This function provides compatibility with the POSIX setpgrp() function.
/// 
/// # Arguments
/// * `pgid` - New process group ID
/// 
/// # Returns
/// * `PosixResult<()>` - Success on setpgrp, error on failure
pub fn setpgrp(pgid: pid_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::setpgrp
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Create a new session and set process group ID
/// 
/// This function provides compatibility with the POSIX setsid() function.
/// 
/// # Returns
/// * `PosixResult<pid_t>` - Session ID, error on failure
pub fn setsid() -> PosixResult<pid_t> {
    // In a real implementation, this would call syscall::setsid
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get session ID
/// 
/// This function provides compatibility with the POSIX getsid() function.
/// 
/// # Arguments
/// * `pid` - PID to get session ID for (0 for current process)
/// 
/// # Returns
/// * `PosixResult<pid_t>` - Session ID, error on failure
pub fn getsid(pid: pid_t) -> PosixResult<pid_t> {
    // In a real implementation, this would call syscall::getsid
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get process group ID for a specific process
/// 
/// This function provides compatibility with the POSIX getpgid() function.
/// 
/// # Arguments
/// * `pid` - PID to get process group ID for (0 for current process)
/// 
/// # Returns
/// * `PosixResult<pid_t>` - Process group ID, error on failure
pub fn getpgid(pid: pid_t) -> PosixResult<pid_t> {
    // In a real implementation, this would call syscall::getpgid
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set process group ID for a specific process
/// 
/// This function provides compatibility with the POSIX setpgid() function.
/// 
/// # Arguments
/// * `pid` - PID to set process group ID for (0 for current process)
/// * `pgid` - New process group ID
/// 
/// # Returns
/// * `PosixResult<()>` - Success on setpgid, error on failure
pub fn setpgid(pid: pid_t, pgid: pid_t) -> PosixResult<()> {
    // In a real implementation, this would call syscall::setpgid
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Change file access and modification times
/// 
/// This function provides compatibility with the POSIX utime() function.
/// 
/// # Arguments
/// * `filename` - Path to the file
/// * `times` - Access and modification times (NULL for current time)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on utime, error on failure
pub fn utime(filename: &str, times: *const utimbuf) -> PosixResult<()> {
    let path_bytes = filename.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::utime
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// UTIME structure for file times
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct utimbuf {
    pub actime: time_t,          // Access time
    pub modtime: time_t,         // Modification time
}

/// Send a signal to a process
/// 
/// This function provides compatibility with the POSIX kill() function.
/// 
/// # Arguments
/// * `pid` - PID to send signal to
/// * `sig` - Signal number
/// 
/// # Returns
/// * `PosixResult<()>` - Success on kill, error on failure
pub fn kill(pid: pid_t, sig: i32) -> PosixResult<()> {
    unsafe {
        let result = syscall::kill(pid, sig);
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(())
        }
    }
}

/// Terminate the calling process
/// 
/// This function provides compatibility with the POSIX abort() function.
/// 
/// # Returns
/// * `!` - This function never returns
pub fn abort() -> ! {
    // In a real implementation, this would raise SIGABRT
    _exit(134) // SIGABRT signal + 128
}

/// Get current working directory
/// 
/// This function provides compatibility with the POSIX getcwd() function.
/// 
/// # Arguments
/// * `buf` - Buffer to store the current directory
/// * `size` - Size of the buffer
/// 
/// # Returns
/// * `PosixResult<*mut u8>` - Pointer to buffer on success, error on failure
pub fn getcwd(buf: *mut u8, size: size_t) -> PosixResult<*mut u8> {
    if size == 0 || buf.is_null() {
        return Err(Errno::Eoverflow);
    }
    
    // In a real implementation, this would call syscall::getcwd
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Change current working directory
/// 
/// This function provides compatibility with the POSIX chdir() function.
/// 
/// # Arguments
/// * `path` - Path to the new working directory
/// 
/// # Returns
/// * `PosixResult<()>` - Success on chdir, error on failure
pub fn chdir(path: &str) -> PosixResult<()> {
    let path_bytes = path.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::chdir
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Change root directory
/// 
/// This function provides compatibility with the POSIX chroot() function.
/// 
/// # Arguments
/// * `path` - Path to the new root directory
/// 
/// # Returns
/// * `PosixResult<()>` - Success on chroot, error on failure
pub fn chroot(path: &str) -> PosixResult<()> {
    let path_bytes = path.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::chroot
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Terminate a session
/// 
/// This function provides compatibility with the POSIX getsid() function.
/// 
/// # Arguments
/// * `sig` - Signal to send to the session
/// 
/// # Returns
/// * `PosixResult<()>` - Success on kill, error on failure
pub fn killpg(pgid: pid_t, sig: i32) -> PosixResult<()> {
    // In a real implementation, this would send signal to process group
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Sleep for a specified number of seconds
/// 
/// This function provides compatibility with the POSIX sleep() function.
/// 
/// # Arguments
/// * `seconds` - Number of seconds to sleep
/// 
/// # Returns
/// * `u32` - Number of seconds actually slept (0 on success)
pub fn sleep(seconds: u32) -> u32 {
    nanosleep(&timespec {
        tv_sec: seconds as time_t,
        tv_nsec: 0,
    }, None).unwrap_or_else(|_| seconds)
}

/// Suspend execution for a specified time
/// 
/// This function provides compatibility with the POSIX nanosleep() function.
/// 
/// # Arguments
/// * `requested_time` - Requested sleep time
/// * `remaining` - Pointer to store remaining time if interrupted
/// 
/// # Returns
/// * `PosixResult<()>` - Success on completion, error on interruption/failure
pub fn nanosleep(requested_time: &timespec, remaining: Option<&mut timespec>) -> PosixResult<()> {
    // In a real implementation, this would call syscall::nanosleep
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get system time
/// 
/// This function provides compatibility with the POSIX time() function.
/// 
/// # Arguments
/// * `tloc` - Pointer to store the time (NULL to ignore)
/// 
/// # Returns
/// * `PosixResult<time_t>` - Time in seconds since Unix epoch
pub fn time(tloc: *mut time_t) -> PosixResult<time_t> {
    unsafe {
        let result = syscall::time(tloc);
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(result as time_t)
        }
    }
}

/// Get high-resolution time
/// 
/// This function provides compatibility with the POSIX gettimeofday() function.
/// 
/// # Arguments
/// * `tv` - Pointer to timeval structure
/// * `tz` - Pointer to timezone structure (ignored in modern systems)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on gettimeofday, error on failure
pub fn gettimeofday(tv: &mut timeval, tz: Option<&mut timezone>) -> PosixResult<()> {
    unsafe {
        let result = syscall::gettimeofday(tv as *mut timeval, 
                                         tz.map_or(core::ptr::null_mut(), |tz| tz as *mut timezone));
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(())
        }
    }
}

/// Set high-resolution time
/// 
/// This function provides compatibility with the POSIX settimeofday() function.
/// 
/// # Arguments
/// * `tv` - Pointer to timeval structure
/// * `tz` - Pointer to timezone structure (ignored in modern systems)
/// 
/// # Returns
/// * `PosixResult<()>` - Success on settimeofday, error on failure
pub fn settimeofday(tv: &timeval, tz: Option<&timezone>) -> PosixResult<()> {
    // In a real implementation, this would call syscall::settimeofday
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get resource limits
/// 
/// This function provides compatibility with the POSIX getrlimit() function.
/// 
/// # Arguments
/// * `resource` - Resource to get limit for
/// * `rlim` - Pointer to rlimit structure
/// 
/// # Returns
/// * `PosixResult<()>` - Success on getrlimit, error on failure
pub fn getrlimit(resource: i32, rlim: *mut rlimit) -> PosixResult<()> {
    // In a real implementation, this would call syscall::getrlimit
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set resource limits
/// 
/// This function provides compatibility with the POSIX setrlimit() function.
/// 
/// # Arguments
/// * `resource` - Resource to set limit for
/// * `rlim` - Pointer to rlimit structure
/// 
/// # Returns
/// * `PosixResult<()>` - Success on setrlimit, error on failure
pub fn setrlimit(resource: i32, rlim: &rlimit) -> PosixResult<()> {
    // In a real implementation, this would call syscall::setrlimit
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Resource limit structure
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct rlimit {
    pub rlim_cur: rlim_t,        // Soft limit
    pub rlim_max: rlim_t,        // Hard limit
}

/// Resource limit type
pub type rlim_t = u64;

/// Resource types
pub const RLIMIT_CORE: i32 = 4;         // Core file size
pub const RLIMIT_CPU: i32 = 0;          // CPU time
pub const RLIMIT_DATA: i32 = 2;         // Data segment size
pub const RLIMIT_FSIZE: i32 = 1;        // File size
pub const RLIMIT_NOFILE: i32 = 7;       // Number of open files
pub const RLIMIT_STACK: i32 = 3;        // Stack size

/// Get process resource usage
/// 
/// This function provides compatibility with the POSIX getrusage() function.
/// 
/// # Arguments
/// * `who` - Process to get usage for
/// * `usage` - Pointer to rusage structure
/// 
/// # Returns
/// * `PosixResult<()>` - Success on getrusage, error on failure
pub fn getrusage(who: i32, usage: *mut rusage) -> PosixResult<()> {
    // In a real implementation, this would call syscall::getrusage
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get system information
/// 
/// This function provides compatibility with the POSIX uname() function.
/// 
/// # Arguments
/// * `buf` - Pointer to utsname structure
/// 
/// # Returns
/// * `PosixResult<()>` - Success on uname, error on failure
pub fn uname(buf: *mut utsname) -> PosixResult<()> {
    // In a real implementation, this would call syscall::uname
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Set a file creation mask
/// 
/// This function provides compatibility with the POSIX umask() function.
/// 
/// # Arguments
/// * `mask` - New file creation mask
/// 
/// # Returns
/// * `mode_t` - Previous file creation mask
pub fn umask(mask: mode_t) -> mode_t {
    // In a real implementation, this would call syscall::umask
    // For now, return default mask
    0o022
}

/// Create a pipe
/// 
/// This function provides compatibility with the POSIX pipe() function.
/// 
/// # Arguments
/// * `pipefd` - Array to store read and write file descriptors
/// 
/// # Returns
/// * `PosixResult<()>` - Success on pipe creation, error on failure
pub fn pipe(pipefd: &mut [fd_t; 2]) -> PosixResult<()> {
    // In a real implementation, this would call syscall::pipe
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Truncate a file
/// 
/// This function provides compatibility with the POSIX truncate() function.
/// 
/// # Arguments
/// * `path` - Path to the file
/// * `length` - New length of the file
/// 
/// # Returns
/// * `PosixResult<()>` - Success on truncate, error on failure
pub fn truncate(path: &str, length: off_t) -> PosixResult<()> {
    let path_bytes = path.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::truncate
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Determine if a file descriptor refers to a terminal
/// 
/// This function provides compatibility with the POSIX isatty() function.
/// 
/// # Arguments
/// * `fd` - File descriptor to check
/// 
/// # Returns
/// * `bool` - True if file descriptor is a terminal, false otherwise
pub fn isatty(fd: fd_t) -> bool {
    // In a real implementation, this would call syscall::isatty
    // For now, return false (not a terminal)
    false
}

/// Get terminal name
/// 
/// This function provides compatibility with the POSIX ttyname() function.
/// 
/// # Arguments
/// * `fd` - File descriptor
/// 
/// # Returns
/// * `PosixResult<&str>` - Terminal name, error on failure
pub fn ttyname(fd: fd_t) -> PosixResult<&str> {
    // In a real implementation, this would call syscall::ttyname
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Utility functions for process and system operations
pub mod utils {
    use super::*;
    
    /// Check if a process is still running
    pub fn is_process_running(pid: pid_t) -> bool {
        // In a real implementation, this would check process existence
        pid > 0
    }
    
    /// Get process priority
    pub fn get_process_priority(pid: pid_t) -> PosixResult<i32> {
        // In a real implementation, this would call syscall::getpriority
        // For now, return not implemented
        Err(Errno::Enosys)
    }
    
    /// Set process priority
    pub fn set_process_priority(which: i32, who: pid_t, prio: i32) -> PosixResult<()> {
        // In a real implementation, this would call syscall::setpriority
        // For now, return not implemented
        Err(Errno::Enosys)
    }
    
    /// Get CPU affinity for a process
    pub fn get_process_affinity(pid: pid_t, cpusetsize: size_t, mask: *mut u8) -> PosixResult<()> {
        // In a real implementation, this would call syscall::sched_setaffinity
        // For now, return not implemented
        Err(Errno::Enosys)
    }
    
    /// Set CPU affinity for a process
    pub fn set_process_affinity(pid: pid_t, cpusetsize: size_t, mask: *const u8) -> PosixResult<()> {
        // In a real implementation, this would call syscall::sched_setaffinity
        // For now, return not implemented
        Err(Errno::Enosys)
    }
    
    /// Get scheduling policy for a process
    pub fn get_process_scheduling(pid: pid_t, policy: *mut i32, param: *mut sched_param) -> PosixResult<()> {
        // In a real implementation, this would call syscall::sched_getparam
        // For now, return not implemented
        Err(Errno::Enosys)
    }
    
    /// Set scheduling policy for a process
    pub fn set_process_scheduling(pid: pid_t, policy: i32, param: &sched_param) -> PosixResult<()> {
        // In a real implementation, this would call syscall::sched_setscheduler
        // For now, return not implemented
        Err(Errno::Enosys)
    }
}

/// Scheduling parameter structure
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sched_param {
    pub sched_priority: i32,     // Scheduling priority
}
