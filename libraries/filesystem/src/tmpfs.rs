//! Temporary File System (tmpfs) Implementation
//! 
//! A simple in-memory file system implementation for testing and temporary storage.
//! This demonstrates how to implement a file system using the VFS interface.

use alloc::vec::Vec;
use alloc::string::String;
use alloc::sync::Arc;
use spin::Mutex;
use bitflags::bitflags;

use super::{FsResult, FsError, FileType, FileStats};
use super::vfs::{FileSystem, FileHandle, OpenFlags, SeekMode, FilesystemStats, DirEntry};

/// Inode identifier
type InodeId = u64;

/// File system implementation
pub struct TmpFs {
    root_inode: InodeId,
    max_inodes: usize,
    current_inodes: usize,
    block_size: u32,
    inodes: Vec<Mutex<Inode>>,
}

/// Inode structure representing a file or directory
#[derive(Debug, Clone)]
struct Inode {
    id: InodeId,
    file_type: FileType,
    name: String,
    parent_id: Option<InodeId>,
    children: Vec<InodeId>,
    data: Vec<u8>,
    size: u64,
    permissions: u16,
    user_id: u32,
    group_id: u32,
    access_time: u64,
    modify_time: u64,
    change_time: u64,
    link_count: u32,
}

/// File handle for tmpfs operations
#[derive(Clone)]
pub struct TmpFsFileHandle {
    pub inode_id: InodeId,
    pub path: String,
    pub flags: OpenFlags,
    pub offset: u64,
    pub stats: FileStats,
}

impl TmpFs {
    /// Create a new tmpfs instance
    pub fn new(max_inodes: usize) -> Self {
        let root_inode = Inode {
            id: 0,
            file_type: FileType::Directory,
            name: String::new(),
            parent_id: None,
            children: Vec::new(),
            data: Vec::new(),
            size: 4096, // Directory size
            permissions: 0o755,
            user_id: 0,
            group_id: 0,
            access_time: 0,
            modify_time: 0,
            change_time: 0,
            link_count: 1,
        };

        Self {
            root_inode,
            max_inodes,
            current_inodes: 1,
            block_size: 4096,
            inodes: vec![Mutex::new(root_inode)],
        }
    }

    /// Create a new tmpfs with default parameters
    pub fn new_default() -> Self {
        Self::new(1024)
    }

    /// Create a new inode
    fn create_inode(&mut self, file_type: FileType, name: &str, parent_id: InodeId, permissions: u16) -> FsResult<InodeId> {
        if self.current_inodes >= self.max_inodes {
            return Err(FsError::DiskFull);
        }

        let inode_id = self.current_inodes;
        let inode = Inode {
            id: inode_id,
            file_type,
            name: name.to_string(),
            parent_id: Some(parent_id),
            children: Vec::new(),
            data: Vec::new(),
            size: match file_type {
                FileType::Directory => 4096,
                _ => 0,
            },
            permissions,
            user_id: 0,
            group_id: 0,
            access_time: current_time(),
            modify_time: current_time(),
            change_time: current_time(),
            link_count: 1,
        };

        self.inodes.push(Mutex::new(inode));
        
        // Add to parent's children
        if let Some(parent) = self.inodes.get_mut(parent_id) {
            let mut parent_guard = parent.lock();
            parent_guard.children.push(inode_id);
            if file_type == FileType::Directory {
                parent_guard.link_count += 1;
            }
        }

        self.current_inodes += 1;
        Ok(inode_id)
    }

    /// Find inode by path
    fn find_inode_by_path(&self, path: &str) -> FsResult<InodeId> {
        if path == "/" || path.is_empty() {
            return Ok(self.root_inode);
        }

        let path_components: Vec<&str> = path.trim_matches('/').split('/').collect();
        let mut current_id = self.root_inode;

        for component in path_components {
            let current_inode = self.inodes[current_id as usize].lock();
            
            if current_inode.file_type != FileType::Directory {
                return Err(FsError::NotFound);
            }

            let child_id = current_inode.children
                .iter()
                .find_map(|&child_id| {
                    let child_inode = self.inodes[child_id as usize].lock();
                    if child_inode.name == component {
                        Some(child_id)
                    } else {
                        None
                    }
                })
                .ok_or(FsError::NotFound)?;

            current_id = child_id;
        }

        Ok(current_id)
    }

    /// Get inode statistics
    fn get_inode_stats(&self, inode_id: InodeId) -> FileStats {
        let inode = self.inodes[inode_id as usize].lock();
        
        FileStats {
            file_type: inode.file_type,
            permissions: inode.permissions,
            size: inode.size,
            blocks: (inode.size + self.block_size as u64 - 1) / self.block_size as u64,
            block_size: self.block_size,
            links_count: inode.link_count,
            access_time: inode.access_time,
            modify_time: inode.modify_time,
            change_time: inode.change_time,
            user_id: inode.user_id,
            group_id: inode.group_id,
            device_id: 0,
            inode: inode_id,
        }
    }

    /// Check if inode exists
    fn inode_exists(&self, inode_id: InodeId) -> bool {
        inode_id < self.current_inodes as u64
    }

    /// List directory contents
    fn list_directory(&self, inode_id: InodeId) -> FsResult<Vec<DirEntry>> {
        let inode = self.inodes[inode_id as usize].lock();
        
        if inode.file_type != FileType::Directory {
            return Err(FsError::IsDirectory);
        }

        let mut entries = Vec::new();
        
        for &child_id in &inode.children {
            let child_inode = self.inodes[child_id as usize].lock();
            let stats = self.get_inode_stats(child_id);
            
            entries.push(DirEntry {
                name: child_inode.name.clone(),
                file_type: child_inode.file_type,
                inode: child_id,
                stats,
            });
        }

        Ok(entries)
    }

    /// Create directory structure
    fn ensure_directory_structure(&mut self, path: &str) -> FsResult<InodeId> {
        let path_components: Vec<&str> = path.trim_matches('/').split('/').collect();
        let mut current_id = self.root_inode;

        for component in path_components {
            let current_inode = self.inodes[current_id as usize].lock();
            
            if current_inode.file_type != FileType::Directory {
                return Err(FsError::IsFile);
            }

            // Check if component exists
            let child_id = current_inode.children
                .iter()
                .find_map(|&child_id| {
                    let child_inode = self.inodes[child_id as usize].lock();
                    if child_inode.name == component {
                        Some(child_id)
                    } else {
                        None
                    }
                });

            match child_id {
                Some(child_id) => {
                    current_id = child_id;
                }
                None => {
                    // Create new directory
                    drop(current_inode);
                    let new_id = self.create_inode(FileType::Directory, component, current_id, 0o755)?;
                    current_id = new_id;
                }
            }
        }

        Ok(current_id)
    }
}

impl FileSystem for TmpFs {
    fn init(&self) -> FsResult<()> {
        // Tmpfs doesn't need complex initialization
        Ok(())
    }

    fn mount(&self, _device: Option<&str>) -> FsResult<()> {
        // Tmpfs is in-memory, doesn't need a device
        Ok(())
    }

    fn unmount(&self) -> FsResult<()> {
        // Clean up resources if needed
        Ok(())
    }

    fn open(&self, path: &str, flags: OpenFlags) -> FsResult<FileHandle> {
        let inode_id = self.find_inode_by_path(path)?;
        let stats = self.get_inode_stats(inode_id);
        
        // Check if creating a new file
        if flags.contains(OpenFlags::CREATE) && !self.inode_exists(inode_id) {
            // This should be handled by create() method, not here
        }

        Ok(FileHandle {
            path: path.to_string(),
            inode: inode_id,
            flags,
            offset: 0,
            stats,
        })
    }

    fn close(&self, _handle: &FileHandle) -> FsResult<()> {
        // Close operations are typically handled by the file descriptor manager
        Ok(())
    }

    fn read(&self, handle: &FileHandle, buf: &mut [u8]) -> FsResult<usize> {
        let inode_id = handle.inode;
        
        // Check read permissions
        if !handle.flags.contains(OpenFlags::READ) {
            return Err(FsError::PermissionDenied);
        }

        let inode = self.inodes[inode_id as usize].lock();
        
        if inode.file_type != FileType::Regular && inode.file_type != FileType::SymbolicLink {
            return Err(FsError::IsDirectory);
        }

        let offset = handle.offset as usize;
        if offset >= inode.data.len() {
            return Ok(0);
        }

        let bytes_to_read = core::cmp::min(buf.len(), inode.data.len() - offset);
        buf[..bytes_to_read].copy_from_slice(&inode.data[offset..offset + bytes_to_read]);

        Ok(bytes_to_read)
    }

    fn write(&self, handle: &FileHandle, buf: &[u8]) -> FsResult<usize> {
        let inode_id = handle.inode;
        
        // Check write permissions
        if !handle.flags.contains(OpenFlags::WRITE) && !handle.flags.contains(OpenFlags::APPEND) {
            return Err(FsError::PermissionDenied);
        }

        let mut inode = self.inodes[inode_id as usize].lock();
        
        if inode.file_type != FileType::Regular {
            return Err(FsError::IsDirectory);
        }

        let offset = if handle.flags.contains(OpenFlags::APPEND) {
            inode.data.len()
        } else {
            handle.offset as usize
        };

        // Ensure data vector is large enough
        if offset + buf.len() > inode.data.len() {
            inode.data.resize(offset + buf.len(), 0);
        }

        inode.data[offset..offset + buf.len()].copy_from_slice(buf);
        inode.size = inode.data.len() as u64;
        inode.modify_time = current_time();
        inode.change_time = current_time();

        Ok(buf.len())
    }

    fn seek(&self, handle: &FileHandle, offset: i64, mode: SeekMode) -> FsResult<u64> {
        let inode = self.inodes[handle.inode as usize].lock();
        let file_size = inode.size;
        
        let new_offset = match mode {
            SeekMode::Start => offset as u64,
            SeekMode::Current => handle.offset as i64 + offset,
            SeekMode::End => file_size as i64 + offset,
        };

        if new_offset < 0 {
            return Err(FsError::InvalidPath);
        }

        Ok(new_offset as u64)
    }

    fn stat(&self, path: &str) -> FsResult<FileStats> {
        let inode_id = self.find_inode_by_path(path)?;
        Ok(self.get_inode_stats(inode_id))
    }

    fn mkdir(&self, path: &str, _mode: u32) -> FsResult<()> {
        let path_components: Vec<&str> = path.trim_matches('/').split('/').collect();
        
        if path_components.is_empty() {
            return Err(FsError::InvalidPath);
        }

        let parent_path = path_components[..path_components.len() - 1].join("/");
        let name = *path_components.last().unwrap();

        let parent_id = if parent_path.is_empty() {
            self.root_inode
        } else {
            self.find_inode_by_path(&format!("/{}", parent_path))?
        };

        // Check if parent is a directory
        let parent = self.inodes[parent_id as usize].lock();
        if parent.file_type != FileType::Directory {
            return Err(FsError::NotFound);
        }
        drop(parent);

        // Check if already exists
        let parent = self.inodes[parent_id as usize].lock();
        if parent.children.iter().any(|&child_id| {
            let child = self.inodes[child_id as usize].lock();
            child.name == name
        }) {
            return Err(FsError::AlreadyExists);
        }
        drop(parent);

        // Create directory
        self.create_inode(FileType::Directory, name, parent_id, 0o755)?;
        Ok(())
    }

    fn rmdir(&self, path: &str) -> FsResult<()> {
        let inode_id = self.find_inode_by_path(path)?;
        let inode = self.inodes[inode_id as usize].lock();
        
        if inode.file_type != FileType::Directory {
            return Err(FsError::IsFile);
        }
        
        if !inode.children.is_empty() {
            return Err(FsError::DirectoryNotEmpty);
        }

        // Remove from parent
        if let Some(parent_id) = inode.parent_id {
            let mut parent = self.inodes[parent_id as usize].lock();
            parent.children.retain(|&child_id| child_id != inode_id);
            parent.link_count -= 1;
        }

        Ok(())
    }

    fn create(&self, path: &str, _mode: u32) -> FsResult<()> {
        let path_components: Vec<&str> = path.trim_matches('/').split('/').collect();
        
        if path_components.is_empty() {
            return Err(FsError::InvalidPath);
        }

        let parent_path = path_components[..path_components.len() - 1].join("/");
        let name = *path_components.last().unwrap();

        let parent_id = if parent_path.is_empty() {
            self.root_inode
        } else {
            self.find_inode_by_path(&format!("/{}", parent_path))?
        };

        // Check if already exists
        let parent = self.inodes[parent_id as usize].lock();
        if parent.children.iter().any(|&child_id| {
            let child = self.inodes[child_id as usize].lock();
            child.name == name
        }) {
            return Err(FsError::AlreadyExists);
        }
        drop(parent);

        // Create file
        self.create_inode(FileType::Regular, name, parent_id, 0o644)?;
        Ok(())
    }

    fn unlink(&self, path: &str) -> FsResult<()> {
        let inode_id = self.find_inode_by_path(path)?;
        let inode = self.inodes[inode_id as usize].lock();
        
        if inode.file_type == FileType::Directory {
            return Err(FsError::IsDirectory);
        }

        // Remove from parent
        if let Some(parent_id) = inode.parent_id {
            let mut parent = self.inodes[parent_id as usize].lock();
            parent.children.retain(|&child_id| child_id != inode_id);
        }

        Ok(())
    }

    fn symlink(&self, target: &str, link_path: &str) -> FsResult<()> {
        let path_components: Vec<&str> = link_path.trim_matches('/').split('/').collect();
        
        if path_components.is_empty() {
            return Err(FsError::InvalidPath);
        }

        let parent_path = path_components[..path_components.len() - 1].join("/");
        let name = *path_components.last().unwrap();

        let parent_id = if parent_path.is_empty() {
            self.root_inode
        } else {
            self.find_inode_by_path(&format!("/{}", parent_path))?
        };

        // Check if already exists
        let parent = self.inodes[parent_id as usize].lock();
        if parent.children.iter().any(|&child_id| {
            let child = self.inodes[child_id as usize].lock();
            child.name == name
        }) {
            return Err(FsError::AlreadyExists);
        }
        drop(parent);

        // Create symbolic link
        let inode_id = self.create_inode(FileType::SymbolicLink, name, parent_id, 0o777)?;
        
        // Store target path in data
        let mut inode = self.inodes[inode_id as usize].lock();
        inode.data = target.as_bytes().to_vec();
        inode.size = target.len() as u64;

        Ok(())
    }

    fn readlink(&self, path: &str) -> FsResult<String> {
        let inode_id = self.find_inode_by_path(path)?;
        let inode = self.inodes[inode_id as usize].lock();
        
        if inode.file_type != FileType::SymbolicLink {
            return Err(FsError::InvalidPath);
        }

        Ok(String::from_utf8_lossy(&inode.data).to_string())
    }

    fn rename(&self, old_path: &str, new_path: &str) -> FsResult<()> {
        // Simplified rename implementation
        let inode_id = self.find_inode_by_path(old_path)?;
        let mut inode = self.inodes[inode_id as usize].lock();
        
        // Update name
        let new_name = new_path.split('/').last().unwrap();
        inode.name = new_name.to_string();

        Ok(())
    }

    fn chmod(&self, path: &str, mode: u32) -> FsResult<()> {
        let inode_id = self.find_inode_by_path(path)?;
        let mut inode = self.inodes[inode_id as usize].lock();
        inode.permissions = mode;
        inode.change_time = current_time();
        Ok(())
    }

    fn chown(&self, path: &str, user_id: u32, group_id: u32) -> FsResult<()> {
        let inode_id = self.find_inode_by_path(path)?;
        let mut inode = self.inodes[inode_id as usize].lock();
        inode.user_id = user_id;
        inode.group_id = group_id;
        inode.change_time = current_time();
        Ok(())
    }

    fn readdir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        let inode_id = self.find_inode_by_path(path)?;
        self.list_directory(inode_id)
    }

    fn fsstat(&self) -> FsResult<FilesystemStats> {
        Ok(FilesystemStats {
            total_blocks: self.max_inodes as u64 * self.block_size as u64 / 4096,
            free_blocks: (self.max_inodes - self.current_inodes) as u64 * self.block_size as u64 / 4096,
            available_blocks: (self.max_inodes - self.current_inodes) as u64 * self.block_size as u64 / 4096,
            total_files: self.current_inodes as u64,
            free_files: (self.max_inodes - self.current_inodes) as u64,
            block_size: self.block_size,
            filename_max_length: 255,
            mounted: true,
            readonly: false,
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.find_inode_by_path(path).is_ok()
    }

    fn file_type(&self, path: &str) -> FsResult<FileType> {
        let inode_id = self.find_inode_by_path(path)?;
        Ok(self.inodes[inode_id as usize].lock().file_type)
    }
}

/// Helper function to get current time (simplified)
fn current_time() -> u64 {
    // In a real implementation, this would get the current system time
    1640995200 // Unix timestamp for Jan 1, 2022
}

/// Extended error for tmpfs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TmpFsError {
    DirectoryNotEmpty,
}

impl From<TmpFsError> for FsError {
    fn from(_error: TmpFsError) -> Self {
        match _error {
            TmpFsError::DirectoryNotEmpty => FsError::IoError,
        }
    }
}