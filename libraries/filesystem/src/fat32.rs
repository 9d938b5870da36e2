//! FAT32 File System Implementation
//! 
//! This is a placeholder implementation for FAT32 file system support.
//! In a complete implementation, this would handle FAT32 specific structures
//! like boot sector, FAT tables, and directory entries.

use alloc::vec::Vec;
use alloc::string::String;

use super::{FsResult, FsError, FileType, FileStats};
use super::vfs::{FileSystem, FileHandle, OpenFlags, SeekMode, FilesystemStats, DirEntry};

/// FAT32 File System implementation
pub struct Fat32Fs {
    device: String,
    sectors_per_cluster: u32,
    bytes_per_sector: u32,
    total_clusters: u32,
    fat_size: u32,
    root_cluster: u32,
}

/// FAT32 directory entry
#[derive(Debug, Clone)]
struct Fat32Entry {
    name: String,
    attributes: u8,
    size: u32,
    start_cluster: u32,
}

/// FAT32 boot sector information
#[derive(Debug, Clone)]
struct Fat32BootSector {
    bytes_per_sector: u16,
    sectors_per_cluster: u8,
    reserved_sectors: u16,
    num_fats: u8,
    total_sectors_32: u32,
    fat_size_32: u32,
    root_cluster: u32,
}

impl Fat32Fs {
    /// Create a new FAT32 file system
    pub fn new(device: &str) -> Self {
        Self {
            device: device.to_string(),
            sectors_per_cluster: 8,
            bytes_per_sector: 512,
            total_clusters: 0,
            fat_size: 0,
            root_cluster: 2,
        }
    }

    /// Read boot sector from device
    fn read_boot_sector(&self) -> FsResult<Fat32BootSector> {
        // Placeholder - would read actual boot sector from device
        Ok(Fat32BootSector {
            bytes_per_sector: 512,
            sectors_per_cluster: 8,
            reserved_sectors: 32,
            num_fats: 2,
            total_sectors_32: 1024 * 1024, // 1GB disk
            fat_size_32: 8192,
            root_cluster: 2,
        })
    }

    /// Read FAT table entry
    fn read_fat_entry(&self, cluster: u32) -> FsResult<u32> {
        // Placeholder - would read FAT table from device
        if cluster == 0x0FFFFFFF || cluster == 0x0FFFFFF8 {
            Ok(0x0FFFFFFF) // End of chain
        } else {
            Ok(cluster + 1) // Simple chaining
        }
    }

    /// Read directory entries
    fn read_directory(&self, cluster: u32) -> FsResult<Vec<Fat32Entry>> {
        // Placeholder - would read directory entries from clusters
        Ok(Vec::new())
    }

    /// Get file type from attributes
    fn get_file_type(&self, attributes: u8) -> FileType {
        if attributes & 0x10 != 0 {
            FileType::Directory
        } else {
            FileType::Regular
        }
    }
}

impl FileSystem for Fat32Fs {
    fn init(&self) -> FsResult<()> {
        // Read and validate boot sector
        let _boot_sector = self.read_boot_sector()?;
        
        // Validate FAT32 structure
        // Check for valid cluster numbers
        // Verify FAT tables
        
        Ok(())
    }

    fn mount(&self, _device: Option<&str>) -> FsResult<()> {
        // Already initialized in new(), but would do device-specific setup here
        Ok(())
    }

    fn unmount(&self) -> FsResult<()> {
        // Flush buffers and sync to device
        Ok(())
    }

    fn open(&self, path: &str, _flags: OpenFlags) -> FsResult<FileHandle> {
        // Placeholder - would find file by traversing directories
        let stats = FileStats {
            file_type: FileType::Regular,
            permissions: 0o644,
            size: 0,
            blocks: 0,
            block_size: self.bytes_per_sector,
            links_count: 1,
            access_time: 0,
            modify_time: 0,
            change_time: 0,
            user_id: 0,
            group_id: 0,
            device_id: 0,
            inode: 0,
        };

        Ok(FileHandle {
            path: path.to_string(),
            inode: 0,
            flags: _flags,
            offset: 0,
            stats,
        })
    }

    fn close(&self, _handle: &FileHandle) -> FsResult<()> {
        Ok(())
    }

    fn read(&self, _handle: &FileHandle, _buf: &mut [u8]) -> FsResult<usize> {
        // Would read data from clusters following FAT chain
        Ok(0)
    }

    fn write(&self, _handle: &FileHandle, _buf: &[u8]) -> FsResult<usize> {
        // Would write data to clusters and update FAT tables
        Ok(0)
    }

    fn seek(&self, _handle: &FileHandle, _offset: i64, _mode: SeekMode) -> FsResult<u64> {
        // Seek through file data
        Ok(0)
    }

    fn stat(&self, _path: &str) -> FsResult<FileStats> {
        // Would get file/directory statistics
        Ok(FileStats {
            file_type: FileType::Regular,
            permissions: 0o644,
            size: 0,
            blocks: 0,
            block_size: self.bytes_per_sector,
            links_count: 1,
            access_time: 0,
            modify_time: 0,
            change_time: 0,
            user_id: 0,
            group_id: 0,
            device_id: 0,
            inode: 0,
        })
    }

    fn mkdir(&self, _path: &str, _mode: u32) -> FsResult<()> {
        // Create directory entry and allocate cluster
        Ok(())
    }

    fn rmdir(&self, _path: &str) -> FsResult<()> {
        // Remove directory and free clusters
        Ok(())
    }

    fn create(&self, _path: &str, _mode: u32) -> FsResult<()> {
        // Create file entry
        Ok(())
    }

    fn unlink(&self, _path: &str) -> FsResult<()> {
        // Remove file entry
        Ok(())
    }

    fn symlink(&self, _target: &str, _link_path: &str) -> FsResult<()> {
        Err(FsError::UnsupportedOperation)
    }

    fn readlink(&self, _path: &str) -> FsResult<String> {
        Err(FsError::UnsupportedOperation)
    }

    fn rename(&self, _old_path: &str, _new_path: &str) -> FsResult<()> {
        // Update directory entries
        Ok(())
    }

    fn chmod(&self, _path: &str, _mode: u32) -> FsResult<()> {
        // Update file attributes
        Ok(())
    }

    fn chown(&self, _path: &str, _user_id: u32, _group_id: u32) -> FsResult<()> {
        // FAT32 doesn't support ownership - would return error
        Err(FsError::UnsupportedOperation)
    }

    fn readdir(&self, _path: &str) -> FsResult<Vec<DirEntry>> {
        // Read directory entries and convert to DirEntry format
        Ok(Vec::new())
    }

    fn fsstat(&self) -> FsResult<FilesystemStats> {
        let boot_sector = self.read_boot_sector()?;
        
        Ok(FilesystemStats {
            total_blocks: boot_sector.total_sectors_32 as u64,
            free_blocks: 0, // Would calculate from free clusters
            available_blocks: 0,
            total_files: 0, // Would track file count
            free_files: 0,
            block_size: self.bytes_per_sector as u32,
            filename_max_length: 255,
            mounted: true,
            readonly: false,
        })
    }

    fn exists(&self, _path: &str) -> bool {
        // Check if path exists in filesystem
        false
    }

    fn file_type(&self, _path: &str) -> FsResult<FileType> {
        // Determine file type from attributes
        Ok(FileType::Regular)
    }
}