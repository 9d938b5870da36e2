//! File system module
//! 
//! This module provides file system functionality.

use crate::KernelResult;
use log::debug;

/// File system types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilesystemType {
    Fat32,
    Ext2,
    Ext4,
    Ntfs,
    Iso9660,
    Unknown,
}

/// File information
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub name: &'static str,
    pub size: u64,
    pub file_type: FileType,
    pub permissions: u16,
    pub created_time: u64,
    pub modified_time: u64,
}

/// File types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Regular,
    Directory,
    SymbolicLink,
    Device,
    Fifo,
    Socket,
    Unknown,
}

/// Initialize file system
pub fn init() -> KernelResult<()> {
    debug!("Initializing file system...");
    
    // TODO: Implement file system initialization
    // - Register file system types
    // - Initialize mount points
    // - Set up file operations
    
    debug!("File system initialized");
    
    Ok(())
}

/// Mount a file system
pub fn mount_filesystem(_device: &str, _mount_point: &str, _fs_type: FilesystemType) -> KernelResult<()> {
    debug!("Mounting {:?} file system on {} from device {}", _fs_type, _mount_point, _device);
    
    // TODO: Implement file system mounting
    Ok(())
}

/// Unmount a file system
pub fn unmount_filesystem(_mount_point: &str) -> KernelResult<()> {
    debug!("Unmounting file system from {}", _mount_point);
    
    // TODO: Implement file system unmounting
    Ok(())
}

/// Open a file
pub fn open_file(_path: &str, _flags: i32) -> KernelResult<u32> {
    debug!("Opening file: {} with flags {:#x}", _path, _flags as u32);
    
    // TODO: Implement file opening
    Ok(1)
}

/// Close a file
pub fn close_file(_fd: u32) -> KernelResult<()> {
    debug!("Closing file descriptor {}", _fd);
    
    // TODO: Implement file closing
    Ok(())
}

/// Read from a file
pub fn read_file(_fd: u32, _buffer: &mut [u8], _offset: u64) -> KernelResult<usize> {
    debug!("Reading from file descriptor {} at offset {}", _fd, _offset);
    
    // TODO: Implement file reading
    Ok(0)
}

/// Write to a file
pub fn write_file(_fd: u32, _buffer: &[u8], _offset: u64) -> KernelResult<usize> {
    debug!("Writing to file descriptor {} at offset {}", _fd, _offset);
    
    // TODO: Implement file writing
    Ok(0)
}

/// Get file information
pub fn get_file_info(_path: &str) -> KernelResult<FileInfo> {
    debug!("Getting file info for: {}", _path);
    
    // TODO: Implement file info retrieval
    Ok(FileInfo {
        name: _path,
        size: 0,
        file_type: FileType::Regular,
        permissions: 0o644,
        created_time: 0,
        modified_time: 0,
    })
}

/// Create a directory
pub fn create_directory(_path: &str, _permissions: u16) -> KernelResult<()> {
    debug!("Creating directory: {} with permissions {:#o}", _path, _permissions);
    
    // TODO: Implement directory creation
    Ok(())
}

/// Remove a file or directory
pub fn remove(_path: &str) -> KernelResult<()> {
    debug!("Removing: {}", _path);
    
    // TODO: Implement file/directory removal
    Ok(())
}

/// List directory contents
pub fn list_directory(_path: &str) -> KernelResult<Vec<FileInfo>> {
    debug!("Listing directory: {}", _path);
    
    // TODO: Implement directory listing
    Ok(Vec::new())
}
