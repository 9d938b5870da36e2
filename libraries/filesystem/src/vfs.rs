//! MultiOS Virtual File System (VFS) Layer
//! 
//! This module provides a unified interface for different file system types,
//! mount point management, path resolution, and namespace management.
//! Supports special files like devices, sockets, pipes, and provides safe
//! Rust abstractions for file system operations.

use spin::Mutex;
use bitflags::bitflags;
use alloc::vec::Vec;
use alloc::string::String;
use alloc::sync::Arc;
use core::time::Duration;

use super::{FileSystemType, FsError, FsResult, FileType};

/// Open flags for file operations
bitflags! {
    #[derive(Debug, Clone, Copy)]
    pub struct OpenFlags: u32 {
        const READ = 0x00000001;
        const WRITE = 0x00000002;
        const APPEND = 0x00000004;
        const TRUNCATE = 0x00000008;
        const CREATE = 0x00000010;
        const EXCLUSIVE = 0x00000020;
        const NO_CTTY = 0x00000040;
        const NON_BLOCKING = 0x00000080;
        const DIRECTORY = 0x00000100;
        const NOFOLLOW = 0x00000200;
        const SYMLINK_NOFOLLOW = 0x00000400;
    }
}

/// File permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FilePermissions {
    None = 0o000,
    OwnerRead = 0o400,
    OwnerWrite = 0o200,
    OwnerExecute = 0o100,
    GroupRead = 0o040,
    GroupWrite = 0o020,
    GroupExecute = 0o010,
    OtherRead = 0o004,
    OtherWrite = 0o002,
    OtherExecute = 0o001,
}

/// File seeking modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekMode {
    Start = 0,
    Current = 1,
    End = 2,
}

/// File statistics
#[derive(Debug, Clone)]
pub struct FileStats {
    pub file_type: FileType,
    pub permissions: u16,
    pub size: u64,
    pub blocks: u64,
    pub block_size: u32,
    pub links_count: u32,
    pub access_time: u64,
    pub modify_time: u64,
    pub change_time: u64,
    pub user_id: u32,
    pub group_id: u32,
    pub device_id: u32,
    pub inode: u64,
}

/// Directory entry
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub file_type: FileType,
    pub inode: u64,
    pub stats: FileStats,
}

/// File handle for operations
#[derive(Clone)]
pub struct FileHandle {
    pub path: String,
    pub inode: u64,
    pub flags: OpenFlags,
    pub offset: u64,
    pub stats: FileStats,
}

/// File system operations trait
pub trait FileSystem: Send + Sync {
    /// Initialize the file system
    fn init(&self) -> FsResult<()>;
    
    /// Mount the file system
    fn mount(&self, device: Option<&str>) -> FsResult<()>;
    
    /// Unmount the file system
    fn unmount(&self) -> FsResult<()>;
    
    /// Open a file
    fn open(&self, path: &str, flags: OpenFlags) -> FsResult<FileHandle>;
    
    /// Close a file
    fn close(&self, handle: &FileHandle) -> FsResult<()>;
    
    /// Read from a file
    fn read(&self, handle: &FileHandle, buf: &mut [u8]) -> FsResult<usize>;
    
    /// Write to a file
    fn write(&self, handle: &FileHandle, buf: &[u8]) -> FsResult<usize>;
    
    /// Seek to position in file
    fn seek(&self, handle: &FileHandle, offset: i64, mode: SeekMode) -> FsResult<u64>;
    
    /// Get file statistics
    fn stat(&self, path: &str) -> FsResult<FileStats>;
    
    /// Create a directory
    fn mkdir(&self, path: &str, mode: u32) -> FsResult<()>;
    
    /// Remove a directory
    fn rmdir(&self, path: &str) -> FsResult<()>;
    
    /// Create a file
    fn create(&self, path: &str, mode: u32) -> FsResult<()>;
    
    /// Remove a file
    fn unlink(&self, path: &str) -> FsResult<()>;
    
    /// Create a symbolic link
    fn symlink(&self, target: &str, link_path: &str) -> FsResult<()>;
    
    /// Read a symbolic link
    fn readlink(&self, path: &str) -> FsResult<String>;
    
    /// Rename a file
    fn rename(&self, old_path: &str, new_path: &str) -> FsResult<()>;
    
    /// Change file permissions
    fn chmod(&self, path: &str, mode: u32) -> FsResult<()>;
    
    /// Change file owner
    fn chown(&self, path: &str, user_id: u32, group_id: u32) -> FsResult<()>;
    
    /// Read directory entries
    fn readdir(&self, path: &str) -> FsResult<Vec<DirEntry>>;
    
    /// Get file system statistics
    fn fsstat(&self) -> FsResult<FilesystemStats>;
    
    /// Check if path exists
    fn exists(&self, path: &str) -> bool;
    
    /// Get file type
    fn file_type(&self, path: &str) -> FsResult<FileType>;
}

/// File system statistics
#[derive(Debug, Clone)]
pub struct FilesystemStats {
    pub total_blocks: u64,
    pub free_blocks: u64,
    pub available_blocks: u64,
    pub total_files: u64,
    pub free_files: u64,
    pub block_size: u32,
    pub filename_max_length: u32,
    pub mounted: bool,
    pub readonly: bool,
}

/// Mount point information
#[derive(Debug, Clone)]
struct MountPoint {
    mount_point: String,
    file_system: Arc<dyn FileSystem>,
    mount_options: Vec<String>,
    device: Option<String>,
    parent_mount: Option<Arc<Mutex<MountPoint>>>,
}

/// Path component for traversal
#[derive(Debug, Clone)]
struct PathComponent {
    name: String,
    mount_point: Arc<Mutex<MountPoint>>,
}

/// Virtual File System Manager
pub struct VfsManager {
    mount_points: Vec<Arc<Mutex<MountPoint>>>,
    namespace_root: String,
    max_path_depth: usize,
}

impl VfsManager {
    /// Create a new VFS manager
    pub fn new() -> Self {
        Self {
            mount_points: Vec::new(),
            namespace_root: "/".to_string(),
            max_path_depth: 256,
        }
    }

    /// Register a file system
    pub fn register_fs(&mut self, fs_type: FileSystemType, fs: Arc<dyn FileSystem>) -> FsResult<()> {
        // Initialize the file system
        fs.init()?;
        
        // Add to available file systems (would typically be in a registry)
        Ok(())
    }

    /// Mount a file system at the specified path
    pub fn mount(&mut self, mount_point: &str, fs_type: FileSystemType, device: Option<&str>) -> FsResult<()> {
        // Validate mount point
        if mount_point.is_empty() || mount_point == "." {
            return Err(FsError::InvalidPath);
        }

        // Check if mount point already exists
        if self.get_mount_point(mount_point).is_some() {
            return Err(FsError::AlreadyExists);
        }

        // Normalize the path
        let normalized_path = self.normalize_path(mount_point);
        
        // Create file system instance based on type
        let file_system = self.create_filesystem(fs_type, device)?;
        
        // Initialize and mount the file system
        file_system.init()?;
        file_system.mount(device)?;
        
        // Create mount point
        let mount = MountPoint {
            mount_point: normalized_path,
            file_system,
            mount_options: Vec::new(),
            device: device.map(|s| s.to_string()),
            parent_mount: self.find_parent_mount(&normalized_path),
        };

        // Add to mount points
        self.mount_points.push(Arc::new(Mutex::new(mount)));
        
        Ok(())
    }

    /// Unmount a file system
    pub fn unmount(&mut self, mount_point: &str) -> FsResult<()> {
        let normalized_path = self.normalize_path(mount_point);
        
        // Find and remove mount point
        let mount_point_idx = self.mount_points
            .iter()
            .position(|mp| mp.lock().mount_point == normalized_path)
            .ok_or(FsError::NotFound)?;

        // Check if mount point is busy (files open)
        // This would require tracking open files per mount point
        
        // Unmount the file system
        let mount = Arc::new(self.mount_points.remove(mount_point_idx));
        let mount_guard = mount.lock();
        mount_guard.file_system.unmount()?;
        
        Ok(())
    }

    /// Open a file
    pub fn open_file(&self, path: &str, flags: OpenFlags) -> FsResult<FileHandle> {
        let (normalized_path, _) = self.resolve_path(path)?;
        let mount_point = self.get_mount_point_for_path(&normalized_path)
            .ok_or(FsError::NotFound)?;
        
        let mount_guard = mount_point.lock();
        let file_handle = mount_guard.file_system.open(&normalized_path, flags)?;
        
        Ok(FileHandle {
            path: normalized_path,
            inode: file_handle.inode,
            flags,
            offset: 0,
            stats: file_handle.stats,
        })
    }

    /// Read from a file
    pub fn read(&self, handle: &FileHandle, buf: &mut [u8]) -> FsResult<usize> {
        let mount_point = self.get_mount_point_for_path(&handle.path)
            .ok_or(FsError::NotFound)?;
        
        let mount_guard = mount_point.lock();
        let mut handle_clone = handle.clone();
        handle_clone.offset = handle.offset;
        
        let bytes_read = mount_guard.file_system.read(&handle_clone, buf)?;
        
        // Update offset
        // Note: This is a simplified version - in practice we'd need more sophisticated
        // tracking of file handles and their state
        
        Ok(bytes_read)
    }

    /// Write to a file
    pub fn write(&self, handle: &FileHandle, buf: &[u8]) -> FsResult<usize> {
        let mount_point = self.get_mount_point_for_path(&handle.path)
            .ok_or(FsError::NotFound)?;
        
        let mount_guard = mount_point.lock();
        let mut handle_clone = handle.clone();
        handle_clone.offset = handle.offset;
        
        let bytes_written = mount_guard.file_system.write(&handle_clone, buf)?;
        
        Ok(bytes_written)
    }

    /// Create a directory
    pub fn create_dir(&mut self, path: &str, mode: u32) -> FsResult<()> {
        let (normalized_path, _) = self.resolve_path(path)?;
        let mount_point = self.get_mount_point_for_path(&normalized_path)
            .ok_or(FsError::NotFound)?;
        
        let mount_guard = mount_point.lock();
        mount_guard.file_system.mkdir(&normalized_path, mode)
    }

    /// Remove a file or directory
    pub fn remove(&mut self, path: &str, recursive: bool) -> FsResult<()> {
        let (normalized_path, _) = self.resolve_path(path)?;
        let mount_point = self.get_mount_point_for_path(&normalized_path)
            .ok_or(FsError::NotFound)?;
        
        let mount_guard = mount_point.lock();
        let file_type = mount_guard.file_system.file_type(&normalized_path)?;
        
        match file_type {
            FileType::Directory => {
                if recursive {
                    // Recursively remove directory contents
                    self.remove_directory_recursive(&normalized_path, &mount_point)?
                } else {
                    mount_guard.file_system.rmdir(&normalized_path)?
                }
            },
            FileType::Regular | FileType::SymbolicLink => {
                mount_guard.file_system.unlink(&normalized_path)?
            },
            _ => return Err(FsError::UnsupportedOperation),
        }
        
        Ok(())
    }

    /// Get file statistics
    pub fn stat(&self, path: &str) -> FsResult<FileStats> {
        let (normalized_path, _) = self.resolve_path(path)?;
        let mount_point = self.get_mount_point_for_path(&normalized_path)
            .ok_or(FsError::NotFound)?;
        
        let mount_guard = mount_point.lock();
        mount_guard.file_system.stat(&normalized_path)
    }

    /// Read directory contents
    pub fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        let (normalized_path, _) = self.resolve_path(path)?;
        let mount_point = self.get_mount_point_for_path(&normalized_path)
            .ok_or(FsError::NotFound)?;
        
        let mount_guard = mount_point.lock();
        mount_guard.file_system.readdir(&normalized_path)
    }

    /// Get number of mounted file systems
    pub fn get_mount_count(&self) -> usize {
        self.mount_points.len()
    }

    /// Internal methods
    fn normalize_path(&self, path: &str) -> String {
        let mut result = String::new();
        
        // Ensure path starts with /
        if !path.starts_with('/') {
            result.push('/');
        }
        
        result.push_str(path);
        
        // Remove duplicate slashes and resolve . and ..
        let components: Vec<&str> = result.split('/').filter(|c| !c.is_empty()).collect();
        let mut normalized = Vec::new();
        
        for component in components {
            match component {
                "." => continue,
                ".." => { normalized.pop(); },
                _ => normalized.push(component),
            }
        }
        
        "/" + &normalized.join("/")
    }

    fn resolve_path(&self, path: &str) -> FsResult<(String, Vec<PathComponent>)> {
        let normalized_path = self.normalize_path(path);
        
        // Check for path traversal limits
        let depth = normalized_path.matches('/').count();
        if depth > self.max_path_depth {
            return Err(FsError::InvalidPath);
        }
        
        // Resolve path components
        let components = self.resolve_path_components(&normalized_path)?;
        
        Ok((normalized_path, components))
    }

    fn resolve_path_components(&self, path: &str) -> FsResult<Vec<PathComponent>> {
        let mut components = Vec::new();
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        
        for part in parts {
            let mount_point = self.get_mount_point_for_component(part, &components)?;
            components.push(PathComponent {
                name: part.to_string(),
                mount_point,
            });
        }
        
        Ok(components)
    }

    fn get_mount_point(&self, path: &str) -> Option<&Arc<Mutex<MountPoint>>> {
        self.mount_points
            .iter()
            .find(|mp| mp.lock().mount_point == path)
    }

    fn get_mount_point_for_path(&self, path: &str) -> Option<Arc<Mutex<MountPoint>>> {
        // Find the most specific mount point that contains this path
        let mut best_match = None;
        
        for mount in &self.mount_points {
            let mount_guard = mount.lock();
            if path.starts_with(&mount_guard.mount_point) {
                if best_match.is_none() || 
                   mount_guard.mount_point.len() > best_match.as_ref().unwrap().lock().mount_point.len() {
                    best_match = Some(mount.clone());
                }
            }
        }
        
        best_match
    }

    fn get_mount_point_for_component(&self, _component: &str, _components: &[PathComponent]) -> FsResult<Arc<Mutex<MountPoint>>> {
        // This would implement the logic for handling mount points
        // within a directory tree (mount points can be anywhere, not just at root)
        // For now, return the root mount point
        self.mount_points
            .first()
            .cloned()
            .ok_or(FsError::NotFound)
    }

    fn find_parent_mount(&self, _path: &str) -> Option<Arc<Mutex<MountPoint>>> {
        // Find the parent mount point for nested mounts
        // This would be more complex in a full implementation
        None
    }

    fn create_filesystem(&self, fs_type: FileSystemType, device: Option<&str>) -> FsResult<Arc<dyn FileSystem>> {
        match fs_type {
            FileSystemType::TmpFs => {
                // Create temporary file system
                todo!()
            },
            FileSystemType::Fat32 => {
                // Create FAT32 file system
                todo!()
            },
            FileSystemType::Ext2 => {
                // Create ext2 file system
                todo!()
            },
            FileSystemType::ProcFs => {
                // Create proc file system
                todo!()
            },
            FileSystemType::DevFs => {
                // Create device file system
                todo!()
            },
            FileSystemType::Unknown => Err(FsError::UnsupportedOperation),
        }
    }

    fn remove_directory_recursive(&self, path: &str, mount_point: &Arc<Mutex<MountPoint>>) -> FsResult<()> {
        // Get directory contents
        let entries = {
            let mount_guard = mount_point.lock();
            mount_guard.file_system.readdir(path)?
        };
        
        // Remove all entries
        for entry in entries {
            let entry_path = if path.ends_with('/') {
                format!("{}{}", path, entry.name)
            } else {
                format!("{}/{}", path, entry.name)
            };
            
            match entry.file_type {
                FileType::Directory => {
                    self.remove_directory_recursive(&entry_path, mount_point)?;
                },
                _ => {
                    let mount_guard = mount_point.lock();
                    mount_guard.file_system.unlink(&entry_path)?;
                },
            }
        }
        
        // Remove the directory itself
        let mount_guard = mount_point.lock();
        mount_guard.file_system.rmdir(path)
    }
}

/// File system handle type alias
pub type FileSystemHandle = Arc<dyn FileSystem>;

/// Directory handle for directory operations
#[derive(Clone)]
pub struct DirHandle {
    pub path: String,
    pub entries: Vec<DirEntry>,
    pub current_index: usize,
}

/// Special file handlers for devices, sockets, pipes, etc.
pub trait SpecialFileHandler: Send + Sync {
    /// Get the special file type
    fn get_type(&self) -> FileType;
    
    /// Read operation for special files
    fn read(&self, buf: &mut [u8]) -> FsResult<usize>;
    
    /// Write operation for special files
    fn write(&self, buf: &[u8]) -> FsResult<usize>;
    
    /// Ioctl operation for special files
    fn ioctl(&self, cmd: u32, arg: usize) -> FsResult<usize>;
    
    /// Poll operation for special files
    fn poll(&self, events: u32) -> FsResult<u32>;
}

/// Device file system handler
pub struct DeviceFileHandler {
    pub device_id: u32,
    pub device_type: FileType,
}

impl SpecialFileHandler for DeviceFileHandler {
    fn get_type(&self) -> FileType {
        self.device_type
    }
    
    fn read(&self, _buf: &mut [u8]) -> FsResult<usize> {
        // Handle device read operation
        Ok(0)
    }
    
    fn write(&self, _buf: &[u8]) -> FsResult<usize> {
        // Handle device write operation
        Ok(0)
    }
    
    fn ioctl(&self, _cmd: u32, _arg: usize) -> FsResult<usize> {
        // Handle device ioctl operation
        Ok(0)
    }
    
    fn poll(&self, _events: u32) -> FsResult<u32> {
        // Handle device poll operation
        Ok(0)
    }
}

/// Socket file system handler
pub struct SocketFileHandler {
    pub socket_type: SocketType,
}

impl SpecialFileHandler for SocketFileHandler {
    fn get_type(&self) -> FileType {
        FileType::Socket
    }
    
    fn read(&self, _buf: &mut [u8]) -> FsResult<usize> {
        // Handle socket read operation
        Ok(0)
    }
    
    fn write(&self, _buf: &[u8]) -> FsResult<usize> {
        // Handle socket write operation
        Ok(0)
    }
    
    fn ioctl(&self, _cmd: u32, _arg: usize) -> FsResult<usize> {
        // Handle socket ioctl operation
        Ok(0)
    }
    
    fn poll(&self, _events: u32) -> FsResult<u32> {
        // Handle socket poll operation
        Ok(0)
    }
}

/// FIFO (named pipe) handler
pub struct FIFOHandler {
    pub name: String,
}

impl SpecialFileHandler for FIFOHandler {
    fn get_type(&self) -> FileType {
        FileType::FIFO
    }
    
    fn read(&self, _buf: &mut [u8]) -> FsResult<usize> {
        // Handle FIFO read operation
        Ok(0)
    }
    
    fn write(&self, _buf: &[u8]) -> FsResult<usize> {
        // Handle FIFO write operation
        Ok(0)
    }
    
    fn ioctl(&self, _cmd: u32, _arg: usize) -> FsResult<usize> {
        // Handle FIFO ioctl operation
        Ok(0)
    }
    
    fn poll(&self, _events: u32) -> FsResult<u32> {
        // Handle FIFO poll operation
        Ok(0)
    }
}

/// Socket types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SocketType {
    Stream = 1,
    Dgram = 2,
    Raw = 3,
    RDM = 4,
    SeqPacket = 5,
}

/// Namespace management for different process namespaces
#[derive(Debug, Clone)]
pub struct Namespace {
    pub mount_points: Vec<Arc<Mutex<MountPoint>>>,
    pub root: String,
}

/// Namespace manager
pub struct NamespaceManager {
    namespaces: Vec<Namespace>,
}

impl NamespaceManager {
    /// Create a new namespace manager
    pub fn new() -> Self {
        Self {
            namespaces: Vec::new(),
        }
    }
    
    /// Create a new namespace
    pub fn create_namespace(&mut self, root: &str) -> FsResult<usize> {
        let namespace = Namespace {
            mount_points: Vec::new(),
            root: root.to_string(),
        };
        
        self.namespaces.push(namespace);
        Ok(self.namespaces.len() - 1)
    }
    
    /// Mount a file system in a namespace
    pub fn mount_in_namespace(&mut self, ns_id: usize, mount_point: &str, fs: Arc<dyn FileSystem>) -> FsResult<()> {
        let namespace = self.namespaces
            .get_mut(ns_id)
            .ok_or(FsError::NotFound)?;
            
        let mount = MountPoint {
            mount_point: mount_point.to_string(),
            file_system: fs,
            mount_options: Vec::new(),
            device: None,
            parent_mount: None,
        };
        
        namespace.mount_points.push(Arc::new(Mutex::new(mount)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests are in vfs_tests.rs
    // This module declaration exists for proper organization
}