//! POSIX stdio.h Compatibility
//! 
//! This module provides comprehensive stdio.h compatibility for MultiOS,
//! including file operations, streams, and formatting functions while
//! maintaining Rust safety guarantees.

use crate::errors::*;
use crate::internal::*;
use crate::syscall;
use crate::types::*;
use core::fmt;
use core::ptr;

/// Maximum filename length
pub const NAME_MAX: usize = 255;

/// Maximum path length
pub const PATH_MAX: usize = 4096;

/// Standard streams
pub const stdin: *mut File = 0 as *mut File;
pub const stdout: *mut File = 1 as *mut File;
pub const stderr: *mut File = 2 as *mut File;

/// File structure
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct File {
    pub fd: fd_t,                // File descriptor
    pub flags: u32,              // File status flags
    pub mode: mode_t,            // File mode
    pub offset: off_t,           // Current file offset
    pub eof: bool,               // End of file flag
    pub error: i32,              // Error code
    pub buffer: *mut u8,         // I/O buffer
    pub buf_size: usize,         // Buffer size
    pub buf_pos: usize,          // Buffer position
    pub buf_count: usize,        // Buffer count
}

/// File status flags
bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FileFlags: u32 {
        const READ = 0x0001;
        const WRITE = 0x0002;
        const APPEND = 0x0004;
        const CREAT = 0x0008;
        const TRUNC = 0x0010;
        const EXCL = 0x0020;
        const NONBLOCK = 0x0080;
        const ASYNC = 0x0400;
        const DIRECT = 0x0800;
        const DIRECTORY = 0x2000;
        const NOFOLLOW = 0x4000;
    }
}

/// Position indicator for fseek
pub const SEEK_SET: i32 = 0;
pub const SEEK_CUR: i32 = 1;
pub const SEEK_END: i32 = 2;

/// Buffer modes
pub const _IOFBF: i32 = 0;       // Fully buffered
pub const _IOLBF: i32 = 1;       // Line buffered
pub const _IONBF: i32 = 2;       // Unbuffered

/// EOF indicator
pub const EOF: i32 = -1;

/// Macro for error checking
macro_rules! check_fd {
    ($fd:expr) => {{
        if $fd < 0 {
            Err(Errno::Ebadf)
        } else {
            Ok(())
        }
    }};
}

/// Open a file
/// 
/// This function provides compatibility with the POSIX open() function.
/// 
/// # Arguments
/// * `pathname` - Path to the file to open
/// * `flags` - Open flags (O_RDONLY, O_WRONLY, O_RDWR, etc.)
/// * `mode` - File mode (permissions) when creating a file
/// 
/// # Returns
/// * `PosixResult<fd_t>` - File descriptor on success, error on failure
pub fn open(pathname: &str, flags: FileFlags, mode: mode_t) -> PosixResult<fd_t> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // Create a temporary buffer for the path
    let mut path_buf = [0u8; PATH_MAX + 1];
    path_buf[..path_bytes.len()].copy_from_slice(path_bytes);
    path_buf[path_bytes.len()] = 0;
    
    unsafe {
        let result = syscall::open(path_buf.as_ptr(), flags, mode);
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(result as fd_t)
        }
    }
}

/// Close a file
/// 
/// This function provides compatibility with the POSIX close() function.
/// 
/// # Arguments
/// * `fd` - File descriptor to close
/// 
/// # Returns
/// * `PosixResult<()>` - Success on close, error on failure
pub fn close(fd: fd_t) -> PosixResult<()> {
    check_fd!(fd)?;
    
    unsafe {
        let result = syscall::close(fd);
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(())
        }
    }
}

/// Read from a file
/// 
/// This function provides compatibility with the POSIX read() function.
/// 
/// # Arguments
/// * `fd` - File descriptor to read from
/// * `buf` - Buffer to read into
/// * `count` - Number of bytes to read
/// 
/// # Returns
/// * `PosixResult<usize>` - Number of bytes read, error on failure
pub fn read(fd: fd_t, buf: &mut [u8]) -> PosixResult<usize> {
    check_fd!(fd)?;
    
    if buf.is_empty() {
        return Ok(0);
    }
    
    unsafe {
        let result = syscall::read(fd, buf.as_mut_ptr(), buf.len());
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(result as usize)
        }
    }
}

/// Write to a file
/// 
/// This function provides compatibility with the POSIX write() function.
/// 
/// # Arguments
/// * `fd` - File descriptor to write to
/// * `buf` - Buffer to write from
/// * `count` - Number of bytes to write
/// 
/// # Returns
/// * `PosixResult<usize>` - Number of bytes written, error on failure
pub fn write(fd: fd_t, buf: &[u8]) -> PosixResult<usize> {
    check_fd!(fd)?;
    
    if buf.is_empty() {
        return Ok(0);
    }
    
    unsafe {
        let result = syscall::write(fd, buf.as_ptr(), buf.len());
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(result as usize)
        }
    }
}

/// Seek to a position in a file
/// 
/// This function provides compatibility with the POSIX lseek() function.
/// 
/// # Arguments
/// * `fd` - File descriptor
/// * `offset` - Offset to seek to
/// * `whence` - How to interpret the offset (SEEK_SET, SEEK_CUR, SEEK_END)
/// 
/// # Returns
/// * `PosixResult<off_t>` - New file offset, error on failure
pub fn lseek(fd: fd_t, offset: off_t, whence: SeekMode) -> PosixResult<off_t> {
    check_fd!(fd)?;
    
    unsafe {
        let result = syscall::lseek(fd, offset, whence);
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(result)
        }
    }
}

/// Get file status
/// 
/// This function provides compatibility with the POSIX fstat() function.
/// 
/// # Arguments
/// * `fd` - File descriptor
/// * `buf` - Buffer to store file status information
/// 
/// # Returns
/// * `PosixResult<()>` - Success on stat, error on failure
pub fn fstat(fd: fd_t, buf: &mut Stat) -> PosixResult<()> {
    check_fd!(fd)?;
    
    unsafe {
        let result = syscall::fstat(fd, buf as *mut Stat);
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(())
        }
    }
}

/// Duplicate a file descriptor
/// 
/// This function provides compatibility with the POSIX dup() function.
/// 
/// # Arguments
/// * `fd` - File descriptor to duplicate
/// 
/// # Returns
/// * `PosixResult<fd_t>` - New file descriptor, error on failure
pub fn dup(fd: fd_t) -> PosixResult<fd_t> {
    check_fd!(fd)?;
    
    unsafe {
        let result = syscall::dup(fd);
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(result)
        }
    }
}

/// Duplicate a file descriptor to a specific value
/// 
/// This function provides compatibility with the POSIX dup2() function.
/// 
/// # Arguments
/// * `oldfd` - File descriptor to duplicate
/// * `newfd` - Target file descriptor value
/// 
/// # Returns
/// * `PosixResult<fd_t>` - New file descriptor, error on failure
pub fn dup2(oldfd: fd_t, newfd: fd_t) -> PosixResult<fd_t> {
    check_fd!(oldfd)?;
    
    unsafe {
        let result = syscall::dup2(oldfd, newfd);
        if result < 0 {
            Err(Errno::from_raw(-result))
        } else {
            Ok(result)
        }
    }
}

/// Truncate a file to a specified length
/// 
/// This function provides compatibility with the POSIX ftruncate() function.
/// 
/// # Arguments
/// * `fd` - File descriptor
/// * `length` - New length of the file
/// 
/// # Returns
/// * `PosixResult<()>` - Success on truncate, error on failure
pub fn ftruncate(fd: fd_t, length: off_t) -> PosixResult<()> {
    check_fd!(fd)?;
    
    // In a real implementation, this would call syscall::ftruncate
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get file status by path
/// 
/// This function provides compatibility with the POSIX stat() function.
/// 
/// # Arguments
/// * `pathname` - Path to the file
/// * `buf` - Buffer to store file status information
/// 
/// # Returns
/// * `PosixResult<()>` - Success on stat, error on failure
pub fn stat(pathname: &str, buf: &mut Stat) -> PosixResult<()> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::stat
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Test file access permissions
/// 
/// This function provides compatibility with the POSIX access() function.
/// 
/// # Arguments
/// * `pathname` - Path to the file
/// * `mode` - Access mode to test (F_OK, R_OK, W_OK, X_OK)
/// 
/// # Returns
/// * `PosixResult<bool>` - True if access is allowed, false if not, error on failure
pub fn access(pathname: &str, mode: mode_t) -> PosixResult<bool> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::access
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Unlink (delete) a file
/// 
/// This function provides compatibility with the POSIX unlink() function.
/// 
/// # Arguments
/// * `pathname` - Path to the file to delete
/// 
/// # Returns
/// * `PosixResult<()>` - Success on unlink, error on failure
pub fn unlink(pathname: &str) -> PosixResult<()> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::unlink
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Create a hard link
/// 
/// This function provides compatibility with the POSIX link() function.
/// 
/// # Arguments
/// * `oldpath` - Existing file path
/// * `newpath` - New hard link path
/// 
/// # Returns
/// * `PosixResult<()>` - Success on link creation, error on failure
pub fn link(oldpath: &str, newpath: &str) -> PosixResult<()> {
    let old_path_bytes = oldpath.as_bytes();
    let new_path_bytes = newpath.as_bytes();
    
    if old_path_bytes.len() > PATH_MAX || new_path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::link
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Create a symbolic link
/// 
/// This function provides compatibility with the POSIX symlink() function.
/// 
/// # Arguments
/// * `target` - Target path
/// * `linkpath` - Symbolic link path
/// 
/// # Returns
/// * `PosixResult<()>` - Success on symlink creation, error on failure
pub fn symlink(target: &str, linkpath: &str) -> PosixResult<()> {
    let target_bytes = target.as_bytes();
    let linkpath_bytes = linkpath.as_bytes();
    
    if target_bytes.len() > PATH_MAX || linkpath_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::symlink
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Read the target of a symbolic link
/// 
/// This function provides compatibility with the POSIX readlink() function.
/// 
/// # Arguments
/// * `linkpath` - Path to the symbolic link
/// * `buf` - Buffer to store the target path
/// 
/// # Returns
/// * `PosixResult<usize>` - Number of bytes read, error on failure
pub fn readlink(linkpath: &str, buf: &mut [u8]) -> PosixResult<usize> {
    let linkpath_bytes = linkpath.as_bytes();
    
    if linkpath_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    if buf.is_empty() {
        return Ok(0);
    }
    
    // In a real implementation, this would call syscall::readlink
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Rename a file
/// 
/// This function provides compatibility with the POSIX rename() function.
/// 
/// # Arguments
/// * `oldpath` - Old file path
/// * `newpath` - New file path
/// 
/// # Returns
/// * `PosixResult<()>` - Success on rename, error on failure
pub fn rename(oldpath: &str, newpath: &str) -> PosixResult<()> {
    let old_path_bytes = oldpath.as_bytes();
    let new_path_bytes = newpath.as_bytes();
    
    if old_path_bytes.len() > PATH_MAX || new_path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::rename
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Change file permissions
/// 
/// This function provides compatibility with the POSIX chmod() function.
/// 
/// # Arguments
/// * `pathname` - Path to the file
/// * `mode` - New permissions
/// 
/// # Returns
/// * `PosixResult<()>` - Success on chmod, error on failure
pub fn chmod(pathname: &str, mode: mode_t) -> PosixResult<()> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::chmod
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Change file ownership
/// 
/// This function provides compatibility with the POSIX chown() function.
/// 
/// # Arguments
/// * `pathname` - Path to the file
/// * `owner` - New user ID
/// * `group` - New group ID
/// 
/// # Returns
/// * `PosixResult<()>` - Success on chown, error on failure
pub fn chown(pathname: &str, owner: uid_t, group: gid_t) -> PosixResult<()> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::chown
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Change the current working directory
/// 
/// This function provides compatibility with the POSIX chdir() function.
/// 
/// # Arguments
/// * `pathname` - Path to the directory
/// 
/// # Returns
/// * `PosixResult<()>` - Success on chdir, error on failure
pub fn chdir(pathname: &str) -> PosixResult<()> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::chdir
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Get the current working directory
/// 
/// This function provides compatibility with the POSIX getcwd() function.
/// 
/// # Arguments
/// * `buf` - Buffer to store the current directory path
/// * `size` - Size of the buffer
/// 
/// # Returns
/// * `PosixResult<&str>` - Current directory path, error on failure
pub fn getcwd(buf: &mut [u8]) -> PosixResult<&str> {
    if buf.is_empty() {
        return Err(Errno::Eoverflow);
    }
    
    // In a real implementation, this would call syscall::getcwd
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Make a directory
/// 
/// This function provides compatibility with the POSIX mkdir() function.
/// 
/// # Arguments
/// * `pathname` - Path to the directory
/// * `mode` - Directory permissions
/// 
/// # Returns
/// * `PosixResult<()>` - Success on mkdir, error on failure
pub fn mkdir(pathname: &str, mode: mode_t) -> PosixResult<()> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::mkdir
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Remove a directory
/// 
/// This function provides compatibility with the POSIX rmdir() function.
/// 
/// # Arguments
/// * `pathname` - Path to the directory
/// 
/// # Returns
/// * `PosixResult<()>` - Success on rmdir, error on failure
pub fn rmdir(pathname: &str) -> PosixResult<()> {
    let path_bytes = pathname.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would call syscall::rmdir
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Open a directory stream
/// 
/// This function provides compatibility with the POSIX opendir() function.
/// 
/// # Arguments
/// * `name` - Directory path
/// 
/// # Returns
/// * `PosixResult<*mut Dir>` - Directory stream pointer, error on failure
pub fn opendir(name: &str) -> PosixResult<*mut Dir> {
    let path_bytes = name.as_bytes();
    if path_bytes.len() > PATH_MAX {
        return Err(Errno::Enametoolong);
    }
    
    // In a real implementation, this would create a directory stream
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Close a directory stream
/// 
/// This function provides compatibility with the POSIX closedir() function.
/// 
/// # Arguments
/// * `dirp` - Directory stream pointer
/// 
/// # Returns
/// * `PosixResult<()>` - Success on closedir, error on failure
pub fn closedir(dirp: *mut Dir) -> PosixResult<()> {
    if dirp.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would close the directory stream
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Read a directory entry
/// 
/// This function provides compatibility with the POSIX readdir() function.
/// 
/// # Arguments
/// * `dirp` - Directory stream pointer
/// 
/// # Returns
/// * `PosixResult<*mut dirent>` - Directory entry pointer, error on failure
pub fn readdir(dirp: *mut Dir) -> PosixResult<*mut dirent> {
    if dirp.is_null() {
        return Err(Errno::Ebadf);
    }
    
    // In a real implementation, this would read the next directory entry
    // For now, return not implemented
    Err(Errno::Enosys)
}

/// Directory stream structure
pub type Dir = core::ffi::c_void;

/// Directory entry structure
pub type dirent = crate::internal::dirent;

/// Common file operations using File structure
impl File {
    /// Create a new File structure
    pub fn new(fd: fd_t) -> Self {
        Self {
            fd,
            flags: 0,
            mode: 0,
            offset: 0,
            eof: false,
            error: 0,
            buffer: ptr::null_mut(),
            buf_size: 0,
            buf_pos: 0,
            buf_count: 0,
        }
    }
    
    /// Check if the file is at end of file
    pub fn eof(&self) -> bool {
        self.eof
    }
    
    /// Check if an error occurred
    pub fn error(&self) -> i32 {
        self.error
    }
    
    /// Get the current file descriptor
    pub fn fd(&self) -> fd_t {
        self.fd
    }
    
    /// Get the current file offset
    pub fn offset(&self) -> off_t {
        self.offset
    }
}

/// Helper functions for common file operations
pub mod helpers {
    use super::*;
    
    /// Read a line from a file
    pub fn fgets(buf: &mut [u8], file: &File) -> PosixResult<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        
        let mut count = 0;
        let mut ch;
        
        while count < buf.len() - 1 {
            match read(file.fd(), &mut [0]) {
                Ok(n) => {
                    if n == 0 {
                        break;
                    }
                    ch = unsafe { core::ptr::read_volatile(0 as *const u8) };
                    buf[count] = ch;
                    count += 1;
                    
                    if ch == b'\n' {
                        break;
                    }
                }
                Err(err) => {
                    return Err(err);
                }
            }
        }
        
        buf[count] = 0; // Null terminate
        Ok(count)
    }
    
    /// Write a line to a file
    pub fn fputs(line: &str, file: &File) -> PosixResult<usize> {
        let mut buf = Vec::from(line);
        buf.push(b'\n');
        
        write(file.fd(), &buf)
    }
    
    /// Format and write to a file
    pub fn fprintf(file: &File, fmt: &str, args: fmt::Arguments) -> PosixResult<usize> {
        let formatted = fmt::format(fmt);
        write(file.fd(), formatted.as_bytes())
    }
    
    /// Format and read from a file
    pub fn fscanf(file: &File, fmt: &str, args: &mut [fmt::Argument]) -> PosixResult<usize> {
        // This is a simplified implementation
        // In a real implementation, this would parse formatted input
        unimplemented!("fscanf not yet implemented")
    }
}

/// File utility functions
pub mod utils {
    use super::*;
    
    /// Get file extension
    pub fn file_extension(path: &str) -> Option<&str> {
        path.rfind('.').and_then(|i| {
            if i > 0 && path.chars().nth(i - 1) != Some('/') {
                Some(&path[i + 1..])
            } else {
                None
            }
        })
    }
    
    /// Get file name from path
    pub fn file_name(path: &str) -> &str {
        if let Some(i) = path.rfind('/') {
            &path[i + 1..]
        } else {
            path
        }
    }
    
    /// Get directory name from path
    pub fn dir_name(path: &str) -> &str {
        if let Some(i) = path.rfind('/') {
            if i == 0 {
                "/"
            } else {
                &path[..i]
            }
        } else {
            "."
        }
    }
    
    /// Check if path is absolute
    pub fn is_absolute_path(path: &str) -> bool {
        path.starts_with('/')
    }
    
    /// Normalize path
    pub fn normalize_path(path: &str) -> String {
        let mut result = String::new();
        let mut components = Vec::new();
        
        for component in path.split('/') {
            match component {
                "" | "." => {}
                ".." => {
                    components.pop();
                }
                _ => {
                    components.push(component);
                }
            }
        }
        
        if path.starts_with('/') {
            result.push('/');
        }
        
        result.extend(components.join("/"));
        
        if result.is_empty() {
            ".".to_string()
        } else {
            result
        }
    }
}
