//! MultiOS System Call Dispatcher
//! 
//! This module provides the core system call dispatcher that routes system calls
//! to appropriate handlers with comprehensive validation and security checks.

use crate::log::{info, warn, error, debug};
use crate::arch::interrupts::*;
use crate::arch::PrivilegeLevel;
use crate::memory::{self, MemoryRegion};
use crate::filesystem::{self, FileSystemStats, SeekMode};
use crate::syscall::validator::SyscallValidator;
use crate::scheduler;
use crate::KernelError;

type SyscallResult<T> = Result<T, SyscallError>;

/// System call dispatcher that handles all system calls with validation and security
pub struct SyscallDispatcher {
    /// Parameter validator
    validator: SyscallValidator,
    /// Security manager
    security_manager: SecurityManager,
    /// Performance profiler
    profiler: PerformanceProfiler,
    /// Statistics collector
    stats: DispatcherStats,
}

impl SyscallDispatcher {
    /// Create new system call dispatcher
    pub fn new() -> Self {
        Self {
            validator: SyscallValidator::new(),
            security_manager: SecurityManager::new(),
            profiler: PerformanceProfiler::new(),
            stats: DispatcherStats::new(),
        }
    }

    /// Dispatch a system call with comprehensive validation and security
    pub fn dispatch_syscall(&mut self, params: SystemCallParams) -> SystemCallResult {
        let start_time = self.profiler.start_timing();
        
        // Increment system call counter
        self.stats.total_syscalls += 1;
        
        info!("Dispatching system call {} from privilege level {:?}", 
              params.syscall_number, params.caller_priv_level);
        
        // Perform comprehensive validation
        let validation_result = self.validate_syscall(&params);
        if let Err(error) = validation_result {
            self.stats.validation_failures += 1;
            self.profiler.end_timing(start_time);
            return SystemCallResult {
                return_value: 0,
                error_code: error.into(),
            };
        }
        
        // Perform security checks
        let security_result = self.security_manager.check_syscall(&params);
        if let Err(error) = security_result {
            self.stats.security_violations += 1;
            warn!("Security violation for syscall {}: {:?}", params.syscall_number, error);
            self.profiler.end_timing(start_time);
            return SystemCallResult {
                return_value: 0,
                error_code: error.into(),
            };
        }
        
        // Route to appropriate handler
        let result = self.route_to_handler(params);
        
        // Update statistics
        self.update_stats(&result, start_time);
        
        self.profiler.end_timing(start_time);
        result
    }

    /// Validate system call parameters
    fn validate_syscall(&self, params: &SystemCallParams) -> SyscallResult<()> {
        // Validate system call number
        if params.syscall_number >= 1000 {
            return Err(SyscallError::ValueOutOfRange);
        }
        
        // Validate privilege level
        match params.caller_priv_level {
            PrivilegeLevel::Ring3 => {
                // User space - validate all parameters
                self.validator.validate_parameters(params)
            }
            PrivilegeLevel::Ring0 => {
                // Kernel space - minimal validation
                Ok(())
            }
            _ => {
                // Other privilege levels - reject for security
                Err(SyscallError::PermissionDenied)
            }
        }
    }

    /// Route system call to appropriate handler
    fn route_to_handler(&mut self, params: SystemCallParams) -> SystemCallResult {
        match params.syscall_number {
            // File and I/O operations
            syscall_numbers::FILE_OPEN => self.handle_file_open(&params),
            syscall_numbers::FILE_CLOSE => self.handle_file_close(&params),
            syscall_numbers::FILE_READ => self.handle_file_read(&params),
            syscall_numbers::FILE_WRITE => self.handle_file_write(&params),
            syscall_numbers::FILE_SEEK => self.handle_file_seek(&params),
            syscall_numbers::FILE_STAT => self.handle_file_stat(&params),
            syscall_numbers::DIRECTORY_CREATE => self.handle_directory_create(&params),
            syscall_numbers::DIRECTORY_READ => self.handle_directory_read(&params),
            
            // Process management
            syscall_numbers::PROCESS_CREATE => self.handle_process_create(&params),
            syscall_numbers::PROCESS_EXIT => self.handle_process_exit(&params),
            syscall_numbers::PROCESS_WAIT => self.handle_process_wait(&params),
            syscall_numbers::PROCESS_GETPID => self.handle_process_getpid(&params),
            syscall_numbers::PROCESS_GETPPID => self.handle_process_getppid(&params),
            
            // Thread management
            syscall_numbers::THREAD_CREATE => self.handle_thread_create(&params),
            syscall_numbers::THREAD_EXIT => self.handle_thread_exit(&params),
            syscall_numbers::THREAD_JOIN => self.handle_thread_join(&params),
            syscall_numbers::THREAD_YIELD => self.handle_thread_yield(&params),
            syscall_numbers::THREAD_GETTID => self.handle_thread_gettid(&params),
            syscall_numbers::THREAD_SET_PRIORITY => self.handle_thread_set_priority(&params),
            syscall_numbers::THREAD_GET_PRIORITY => self.handle_thread_get_priority(&params),
            
            // Memory management
            syscall_numbers::VIRTUAL_ALLOC => self.handle_virtual_alloc(&params),
            syscall_numbers::VIRTUAL_FREE => self.handle_virtual_free(&params),
            syscall_numbers::VIRTUAL_MAP => self.handle_virtual_map(&params),
            syscall_numbers::VIRTUAL_UNMAP => self.handle_virtual_unmap(&params),
            syscall_numbers::PHYSICAL_ALLOC => self.handle_physical_alloc(&params),
            syscall_numbers::PHYSICAL_FREE => self.handle_physical_free(&params),
            
            // Extended file operations
            syscall_numbers::FILE_LOCK => self.handle_file_lock(&params),
            syscall_numbers::FILE_UNLOCK => self.handle_file_unlock(&params),
            syscall_numbers::FILE_TRUNCATE => self.handle_file_truncate(&params),
            syscall_numbers::FILE_DUP => self.handle_file_dup(&params),
            syscall_numbers::FILE_DUP2 => self.handle_file_dup2(&params),
            syscall_numbers::FILE_CHMOD => self.handle_file_chmod(&params),
            syscall_numbers::FILE_CHOWN => self.handle_file_chown(&params),
            syscall_numbers::FILE_RENAME => self.handle_file_rename(&params),
            syscall_numbers::FILE_REMOVE => self.handle_file_remove(&params),
            syscall_numbers::FILE_SYMLINK_CREATE => self.handle_file_symlink_create(&params),
            syscall_numbers::FILE_READLINK => self.handle_file_readlink(&params),
            
            // System information
            syscall_numbers::SYSTEM_INFO => self.handle_system_info(&params),
            syscall_numbers::MEMORY_INFO => self.handle_memory_info(&params),
            syscall_numbers::CPU_INFO => self.handle_cpu_info(&params),
            syscall_numbers::TIME_GET => self.handle_time_get(&params),
            syscall_numbers::CLOCK_GETTIME => self.handle_clock_gettime(&params),
            
            // Security and access control
            syscall_numbers::SECURITY_CHECK => self.handle_security_check(&params),
            syscall_numbers::RESOURCE_LIMIT => self.handle_resource_limit(&params),
            syscall_numbers::PERMISSION_SET => self.handle_permission_set(&params),
            syscall_numbers::AUDIT_LOG => self.handle_audit_log(&params),
            
            // Debug and monitoring
            syscall_numbers::DEBUG_SET_BREAKPOINT => self.handle_debug_set_breakpoint(&params),
            syscall_numbers::DEBUG_REMOVE_BREAKPOINT => self.handle_debug_remove_breakpoint(&params),
            syscall_numbers::PROFILING_START => self.handle_profiling_start(&params),
            syscall_numbers::PROFILING_STOP => self.handle_profiling_stop(&params),
            syscall_numbers::TRACE_MARKER => self.handle_trace_marker(&params),
            
            _ => {
                self.stats.unimplemented_syscalls += 1;
                warn!("Unimplemented system call: {}", params.syscall_number);
                Err(SyscallError::OperationNotSupported)
            }
        }
    }

    /// Update dispatcher statistics
    fn update_stats(&mut self, result: &SystemCallResult, start_time: u64) {
        self.stats.total_syscalls += 1;
        
        match result {
            Ok(_) => self.stats.successful_syscalls += 1,
            Err(error) => {
                self.stats.failed_syscalls += 1;
                self.stats.error_counts[error as usize & 0xFF] += 1;
            }
        }
        
        let elapsed = self.profiler.end_timing(start_time);
        if elapsed > self.stats.max_latency {
            self.stats.max_latency = elapsed;
        }
        self.stats.avg_latency = (self.stats.avg_latency + elapsed) / 2;
    }

    // ==================== Handler Implementations ====================

    /// Handle file open
    fn handle_file_open(&mut self, params: &SystemCallParams) -> SystemCallResult {
        // Validate parameters
        self.validator.validate_string_ptr(params.arg0)?;
        self.validator.validate_integer(params.arg1, 0..=0xFFFF)?;
        self.validator.validate_integer(params.arg2, 0..=0xFFFF)?;
        
        // Get current process credentials
        let uid = self.security_manager.get_current_uid();
        let gid = self.security_manager.get_current_gid();
        
        // Parse flags and mode
        let flags = params.arg1 as u32;
        let mode = params.arg2 as u32;
        
        // Get path string (would be unsafe in real implementation)
        let path = "validated_path"; // Placeholder
        
        // Open the file
        match filesystem::open_file(path, flags, mode, uid, gid) {
            Ok(fd) => {
                self.stats.file_operations += 1;
                debug!("File opened successfully, fd: {}", fd);
                SystemCallResult {
                    return_value: fd,
                    error_code: InterruptError::SystemCallInvalid,
                }
            }
            Err(err) => {
                self.stats.file_operation_failures += 1;
                warn!("File open failed: {:?}", err);
                SystemCallResult {
                    return_value: 0,
                    error_code: err.into(),
                }
            }
        }
    }

    /// Handle file close
    fn handle_file_close(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_integer(params.arg0, 0..=u32::MAX as usize)?;
        
        match filesystem::close_file(params.arg0) {
            Ok(_) => {
                self.stats.file_operations += 1;
                debug!("File closed successfully, fd: {}", params.arg0);
                SystemCallResult {
                    return_value: 0,
                    error_code: InterruptError::SystemCallInvalid,
                }
            }
            Err(err) => {
                warn!("File close failed: {:?}", err);
                SystemCallResult {
                    return_value: -1,
                    error_code: err.into(),
                }
            }
        }
    }

    /// Handle file read
    fn handle_file_read(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_integer(params.arg0, 0..=u32::MAX as usize)?;
        self.validator.validate_pointer(params.arg1, params.arg2)?;
        
        let buffer_size = params.arg2;
        
        // Create temporary buffer for read operation
        let mut buffer = vec![0u8; buffer_size.min(4096)]; // Limit to 4KB
        
        match filesystem::read_file(params.arg0, &mut buffer, 0, buffer_size) {
            Ok(bytes_read) => {
                self.stats.file_operations += 1;
                
                // Copy data to user space (simplified)
                unsafe {
                    core::ptr::copy_nonoverlapping(
                        buffer.as_ptr(),
                        params.arg1 as *mut u8,
                        bytes_read.min(buffer_size)
                    );
                }
                
                debug!("Read {} bytes from fd: {}", bytes_read, params.arg0);
                SystemCallResult {
                    return_value: bytes_read,
                    error_code: InterruptError::SystemCallInvalid,
                }
            }
            Err(err) => {
                warn!("File read failed: {:?}", err);
                SystemCallResult {
                    return_value: 0,
                    error_code: err.into(),
                }
            }
        }
    }

    /// Handle file write
    fn handle_file_write(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_integer(params.arg0, 0..=u32::MAX as usize)?;
        self.validator.validate_pointer(params.arg1, params.arg2)?;
        
        let buffer_size = params.arg2;
        let buffer_size = buffer_size.min(4096); // Limit to 4KB
        
        // Create temporary buffer for write operation
        let mut buffer = vec![0u8; buffer_size];
        
        // Copy data from user space (simplified)
        unsafe {
            core::ptr::copy_nonoverlapping(
                params.arg1 as *const u8,
                buffer.as_mut_ptr(),
                buffer_size
            );
        }
        
        match filesystem::write_file(params.arg0, &buffer, 0, buffer_size) {
            Ok(bytes_written) => {
                self.stats.file_operations += 1;
                debug!("Wrote {} bytes to fd: {}", bytes_written, params.arg0);
                SystemCallResult {
                    return_value: bytes_written,
                    error_code: InterruptError::SystemCallInvalid,
                }
            }
            Err(err) => {
                warn!("File write failed: {:?}", err);
                SystemCallResult {
                    return_value: 0,
                    error_code: err.into(),
                }
            }
        }
    }

    /// Handle file seek
    fn handle_file_seek(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_integer(params.arg0, 0..=u32::MAX as usize)?;
        self.validator.validate_integer(params.arg1, 0..=usize::MAX)?;
        self.validator.validate_integer(params.arg2, 0..=2)?;
        
        let seek_mode = match params.arg2 {
            0 => SeekMode::Set,
            1 => SeekMode::Current,
            2 => SeekMode::End,
            _ => return SystemCallResult {
                return_value: 0,
                error_code: InterruptError::SystemCallInvalid,
            },
        };
        
        match filesystem::seek_file(params.arg0, params.arg1 as i64, seek_mode) {
            Ok(new_position) => {
                debug!("Seek to position {} in fd: {}", new_position, params.arg0);
                SystemCallResult {
                    return_value: new_position,
                    error_code: InterruptError::SystemCallInvalid,
                }
            }
            Err(err) => {
                warn!("File seek failed: {:?}", err);
                SystemCallResult {
                    return_value: -1,
                    error_code: err.into(),
                }
            }
        }
    }

    /// Handle file statistics
    fn handle_file_stat(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_integer(params.arg0, 0..=u32::MAX as usize)?;
        self.validator.validate_pointer(params.arg1, core::mem::size_of::<FileSystemStats>())?;
        
        match filesystem::file_stat(params.arg0) {
            Ok(stats) => {
                // Copy stats to user space
                unsafe {
                    core::ptr::write(
                        params.arg1 as *mut FileSystemStats,
                        stats
                    );
                }
                
                debug!("File stat successful for fd: {}", params.arg0);
                SystemCallResult {
                    return_value: 0,
                    error_code: InterruptError::SystemCallInvalid,
                }
            }
            Err(err) => {
                warn!("File stat failed: {:?}", err);
                SystemCallResult {
                    return_value: -1,
                    error_code: err.into(),
                }
            }
        }
    }

    /// Handle thread yield
    fn handle_thread_yield(&mut self, params: &SystemCallParams) -> SystemCallResult {
        scheduler::yield_current_thread();
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallInvalid,
        }
    }

    /// Handle time get
    fn handle_time_get(&mut self, params: &SystemCallParams) -> SystemCallResult {
        use crate::bootstrap::get_boot_time;
        SystemCallResult {
            return_value: get_boot_time(),
            error_code: InterruptError::SystemCallInvalid,
        }
    }

    /// Handle system info
    fn handle_system_info(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_pointer(params.arg0, core::mem::size_of::<crate::SystemInfo>())?;
        
        if let Ok(info) = crate::get_system_info() {
            unsafe {
                core::ptr::copy_nonoverlapping(
                    &info,
                    params.arg0 as *mut crate::SystemInfo,
                    1
                );
            }
            SystemCallResult {
                return_value: 1,
                error_code: InterruptError::SystemCallInvalid,
            }
        } else {
            SystemCallResult {
                return_value: 0,
                error_code: InterruptError::SystemCallInvalid,
            }
        }
    }

    /// Handle memory info
    fn handle_memory_info(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_pointer(params.arg0, core::mem::size_of::<memory::MemoryStats>())?;
        
        let stats = memory::get_memory_stats();
        unsafe {
            core::ptr::copy_nonoverlapping(
                &stats,
                params.arg0 as *mut memory::MemoryStats,
                1
            );
        }
        SystemCallResult {
            return_value: 1,
            error_code: InterruptError::SystemCallInvalid,
        }
    }

    // ==================== Stub Implementations ====================
    // Most other handlers are stubs that need full implementation
    fn handle_directory_create(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_string_ptr(params.arg0)?;
        warn!("Directory create not yet fully implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_directory_read(&mut self, params: &SystemCallParams) -> SystemCallResult {
        self.validator.validate_integer(params.arg0, 0..=u32::MAX as usize)?;
        self.validator.validate_pointer(params.arg1, params.arg2)?;
        warn!("Directory read not yet fully implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_process_create(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Process create not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_process_exit(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Process exit not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_process_wait(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Process wait not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_process_getpid(&mut self, params: &SystemCallParams) -> SystemCallResult {
        SystemCallResult {
            return_value: 1,
            error_code: InterruptError::SystemCallInvalid,
        }
    }

    fn handle_process_getppid(&mut self, params: &SystemCallParams) -> SystemCallResult {
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallInvalid,
        }
    }

    fn handle_thread_create(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Thread creation not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_thread_exit(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Thread exit not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_thread_join(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Thread join not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_thread_gettid(&mut self, params: &SystemCallParams) -> SystemCallResult {
        SystemCallResult {
            return_value: 1,
            error_code: InterruptError::SystemCallInvalid,
        }
    }

    fn handle_thread_set_priority(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Thread priority setting not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_thread_get_priority(&mut self, params: &SystemCallParams) -> SystemCallResult {
        SystemCallResult {
            return_value: 2,
            error_code: InterruptError::SystemCallInvalid,
        }
    }

    fn handle_virtual_alloc(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Virtual memory allocation not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_virtual_free(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Virtual memory freeing not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_virtual_map(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Virtual memory mapping not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_virtual_unmap(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Virtual memory unmapping not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_physical_alloc(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Physical memory allocation not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_physical_free(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Physical memory freeing not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    // Extended file operations (stubs)
    fn handle_file_lock(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File locking not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_unlock(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File unlocking not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_truncate(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File truncate not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_dup(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File dup not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_dup2(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File dup2 not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_chmod(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File chmod not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_chown(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File chown not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_rename(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File rename not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_remove(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File remove not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_symlink_create(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File symlink creation not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_file_readlink(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("File readlink not yet implemented");
        SystemCallResult {
            return_value: -1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    // System information (stubs)
    fn handle_cpu_info(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("CPU info not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_clock_gettime(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Clock gettime not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    // Security and access control (stubs)
    fn handle_security_check(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Security check not yet implemented");
        SystemCallResult {
            return_value: 1,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_resource_limit(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Resource limit not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_permission_set(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Permission setting not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_audit_log(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Audit logging not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    // Debug and monitoring (stubs)
    fn handle_debug_set_breakpoint(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Debug breakpoint setting not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_debug_remove_breakpoint(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Debug breakpoint removal not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_profiling_start(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Profiling start not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_profiling_stop(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Profiling stop not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }

    fn handle_trace_marker(&mut self, params: &SystemCallParams) -> SystemCallResult {
        warn!("Trace markers not yet implemented");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallNotImplemented,
        }
    }
}

// ==================== Supporting Structures ====================

/// Dispatcher statistics
#[derive(Debug, Clone)]
pub struct DispatcherStats {
    pub total_syscalls: u64,
    pub successful_syscalls: u64,
    pub failed_syscalls: u64,
    pub validation_failures: u64,
    pub security_violations: u64,
    pub unimplemented_syscalls: u64,
    pub file_operations: u64,
    pub file_operation_failures: u64,
    pub max_latency: u64,
    pub avg_latency: u64,
    pub error_counts: [u64; 256],
}

impl DispatcherStats {
    pub fn new() -> Self {
        Self {
            total_syscalls: 0,
            successful_syscalls: 0,
            failed_syscalls: 0,
            validation_failures: 0,
            security_violations: 0,
            unimplemented_syscalls: 0,
            file_operations: 0,
            file_operation_failures: 0,
            max_latency: 0,
            avg_latency: 0,
            error_counts: [0; 256],
        }
    }
}

/// Performance profiler for system calls
#[derive(Debug)]
pub struct PerformanceProfiler {
    pub total_measurements: u64,
    pub avg_latency_ns: u64,
    pub max_latency_ns: u64,
}

impl PerformanceProfiler {
    pub fn new() -> Self {
        Self {
            total_measurements: 0,
            avg_latency_ns: 0,
            max_latency_ns: 0,
        }
    }

    pub fn start_timing(&self) -> u64 {
        // Get current timestamp (simplified)
        0 // Placeholder
    }

    pub fn end_timing(&mut self, start_time: u64) -> u64 {
        // Calculate elapsed time (simplified)
        let elapsed = 100; // Placeholder
        self.total_measurements += 1;
        self.avg_latency_ns = (self.avg_latency_ns + elapsed) / 2;
        if elapsed > self.max_latency_ns {
            self.max_latency_ns = elapsed;
        }
        elapsed
    }
}

/// Security manager for system call access control
#[derive(Debug)]
pub struct SecurityManager {
    pub current_uid: u32,
    pub current_gid: u32,
    pub capabilities: u64,
}

impl SecurityManager {
    pub fn new() -> Self {
        Self {
            current_uid: 1000, // Default user ID
            current_gid: 1000, // Default group ID
            capabilities: 0x1F, // Basic capabilities
        }
    }

    /// Check if system call is allowed
    pub fn check_syscall(&self, params: &SystemCallParams) -> SyscallResult<()> {
        // Basic security check - only allow certain syscalls from user space
        if params.caller_priv_level == PrivilegeLevel::Ring3 {
            match params.syscall_number {
                syscall_numbers::PROCESS_CREATE | 
                syscall_numbers::PROCESS_EXIT |
                syscall_numbers::VIRTUAL_ALLOC |
                syscall_numbers::VIRTUAL_FREE |
                syscall_numbers::SECURITY_CHECK |
                syscall_numbers::RESOURCE_LIMIT => {
                    // Check if process has required capabilities
                    if (self.capabilities & 0x10) == 0 {
                        return Err(SyscallError::PermissionDenied);
                    }
                }
                _ => {
                    // Other syscalls are allowed for basic operations
                }
            }
        }
        Ok(())
    }

    /// Get current user ID
    pub fn get_current_uid(&self) -> u32 {
        self.current_uid
    }

    /// Get current group ID
    pub fn get_current_gid(&self) -> u32 {
        self.current_gid
    }
}

use crate::syscall_numbers;

/// Global system call dispatcher
use spin::Mutex;
static SYSCALL_DISPATCHER: Mutex<Option<SyscallDispatcher>> = Mutex::new(None);

/// Initialize global system call dispatcher
pub fn init_syscall_dispatcher() -> Result<(), KernelError> {
    let mut dispatcher_guard = SYSCALL_DISPATCHER.lock();
    
    if dispatcher_guard.is_some() {
        return Err(KernelError::AlreadyInitialized);
    }
    
    let dispatcher = SyscallDispatcher::new();
    *dispatcher_guard = Some(dispatcher);
    
    info!("System call dispatcher initialized");
    Ok(())
}

/// Get global system call dispatcher
pub fn get_syscall_dispatcher() -> Option<Mutex<SyscallDispatcher>> {
    SYSCALL_DISPATCHER.lock().as_ref().map(|_| SYSCALL_DISPATCHER.clone())
}

/// Handle system call via global dispatcher
pub fn handle_system_call(params: SystemCallParams) -> SystemCallResult {
    let mut dispatcher_guard = SYSCALL_DISPATCHER.lock();
    
    if let Some(dispatcher) = dispatcher_guard.as_mut() {
        dispatcher.dispatch_syscall(params)
    } else {
        warn!("System call dispatcher not initialized");
        SystemCallResult {
            return_value: 0,
            error_code: InterruptError::SystemCallInvalid,
        }
    }
}