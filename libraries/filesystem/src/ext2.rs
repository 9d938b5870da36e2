//! ext2 File System Implementation
//! 
//! This is a placeholder implementation for ext2 file system support.
//! In a complete implementation, this would handle ext2 specific structures
//! like superblock, inode tables, block groups, and directory entries.

use alloc::vec::Vec;
use alloc::string::String;

use super::{FsResult, FsError, FileType, FileStats};
use super::vfs::{FileSystem, FileHandle, OpenFlags, SeekMode, FilesystemStats, DirEntry};

/// ext2 File System implementation
pub struct Ext2Fs {
    device: String,
    block_size: u32,
    inode_size: u32,
    blocks_per_group: u32,
    inodes_per_group: u32,
    block_groups: u32,
    total_inodes: u32,
    total_blocks: u32,
}

/// ext2 superblock
#[derive(Debug, Clone)]
struct Ext2Superblock {
    total_inodes: u32,
    total_blocks: u32,
    reserved_blocks: u32,
    free_blocks: u32,
    free_inodes: u32,
    first_data_block: u32,
    log_block_size: u32,
    log_frag_size: u32,
    blocks_per_group: u32,
    frags_per_group: u32,
    inodes_per_group: u32,
    mtime: u32,
    wtime: u32,
    mount_count: u16,
    max_mount_count: u16,
    magic: u16,
    state: u16,
    errors: u16,
    minor_rev_level: u16,
    lastcheck: u32,
    checkinterval: u32,
    creator_os: u32,
    rev_level: u32,
    uid_reserved: u16,
    gid_reserved: u16,
    first_non_reserved_inode: u32,
    inode_size: u16,
    block_group_number: u16,
    compatible_features: u32,
    incompatible_features: u32,
    ro_compatible_features: u32,
    journal_uuid: [u8; 16],
    journal_inode: u32,
    journal_dev: u32,
    last_orphan: u32,
}

/// ext2 block group descriptor
#[derive(Debug, Clone)]
struct Ext2BlockGroup {
    block_bitmap: u32,
    inode_bitmap: u32,
    inode_table: u32,
    free_blocks_count: u16,
    free_inodes_count: u16,
    used_dirs_count: u16,
    pad: u16,
    reserved: [u8; 12],
}

/// ext2 inode
#[derive(Debug, Clone)]
struct Ext2Inode {
    mode: u16,
    uid: u16,
    size: u32,
    atime: u32,
    ctime: u32,
    mtime: u32,
    dtime: u32,
    gid: u16,
    links_count: u16,
    blocks: u32,
    flags: u32,
    osd1: u32,
    block: [u32; 15],
    generation: u32,
    file_acl: u32,
    dir_acl: u32,
    faddr: u32,
    osd2: [u8; 12],
}

/// ext2 directory entry
#[derive(Debug, Clone)]
struct Ext2DirEntry {
    inode: u32,
    rec_len: u16,
    name_len: u16,
    name: String,
}

impl Ext2Fs {
    /// Create a new ext2 file system
    pub fn new(device: &str) -> Self {
        Self {
            device: device.to_string(),
            block_size: 4096,
            inode_size: 128,
            blocks_per_group: 32768,
            inodes_per_group: 8192,
            block_groups: 0,
            total_inodes: 0,
            total_blocks: 0,
        }
    }

    /// Read superblock from device
    fn read_superblock(&self) -> FsResult<Ext2Superblock> {
        // Placeholder - would read superblock from offset 1024
        // In a real implementation, would handle different block sizes
        Ok(Ext2Superblock {
            total_inodes: 1024 * 1024,
            total_blocks: 1024 * 1024,
            reserved_blocks: 1024,
            free_blocks: 512 * 1024,
            free_inodes: 512 * 1024,
            first_data_block: 1,
            log_block_size: 12, // 4096 bytes = 2^12
            log_frag_size: 12,
            blocks_per_group: 32768,
            frags_per_group: 32768,
            inodes_per_group: 8192,
            mtime: 1640995200,
            wtime: 1640995200,
            mount_count: 0,
            max_mount_count: 20,
            magic: 0xEF53,
            state: 1, // Cleanly unmounted
            errors: 1, // Continue on error
            minor_rev_level: 0,
            lastcheck: 1640995200,
            checkinterval: 15552000,
            creator_os: 0, // Linux
            rev_level: 1,
            uid_reserved: 0,
            gid_reserved: 0,
            first_non_reserved_inode: 11,
            inode_size: 128,
            block_group_number: 0,
            compatible_features: 0,
            incompatible_features: 0,
            ro_compatible_features: 0,
            journal_uuid: [0; 16],
            journal_inode: 0,
            journal_dev: 0,
            last_orphan: 0,
        })
    }

    /// Read block group descriptors
    fn read_block_groups(&self, superblock: &Ext2Superblock) -> FsResult<Vec<Ext2BlockGroup>> {
        let num_groups = (superblock.total_blocks + superblock.blocks_per_group - 1) / superblock.blocks_per_group;
        
        // Placeholder - would read actual block group descriptors
        let mut groups = Vec::new();
        for i in 0..num_groups {
            groups.push(Ext2BlockGroup {
                block_bitmap: i * superblock.blocks_per_group + 2,
                inode_bitmap: i * superblock.blocks_per_group + 3,
                inode_table: i * superblock.blocks_per_group + 4,
                free_blocks_count: superblock.blocks_per_group / 2,
                free_inodes_count: superblock.inodes_per_group / 2,
                used_dirs_count: 1,
                pad: 0,
                reserved: [0; 12],
            });
        }
        
        Ok(groups)
    }

    /// Read inode by number
    fn read_inode(&self, inode_num: u32, superblock: &Ext2Superblock) -> FsResult<Ext2Inode> {
        // Calculate block group and index within group
        let group = (inode_num - 1) / superblock.inodes_per_group;
        let index = (inode_num - 1) % superblock.inodes_per_group;
        
        // Calculate inode table block
        let block_size = 1 << superblock.log_block_size;
        let inode_table_block = group * superblock.blocks_per_group + 4; // Simplified
        let inode_offset = index as usize * superblock.inode_size as usize;
        
        // Placeholder - would read actual inode from device
        Ok(Ext2Inode {
            mode: 0o100644, // Regular file
            uid: 0,
            size: 0,
            atime: 1640995200,
            ctime: 1640995200,
            mtime: 1640995200,
            dtime: 0,
            gid: 0,
            links_count: 1,
            blocks: 0,
            flags: 0,
            osd1: 0,
            block: [0; 15],
            generation: 0,
            file_acl: 0,
            dir_acl: 0,
            faddr: 0,
            osd2: [0; 12],
        })
    }

    /// Get file type from inode mode
    fn get_file_type(&self, mode: u16) -> FileType {
        match mode & 0xF000 {
            0x4000 => FileType::Directory,
            0x6000 => FileType::BlockDevice,
            0x2000 => FileType::CharacterDevice,
            0x1000 => FileType::FIFO,
            0xC000 => FileType::Socket,
            0xA000 => FileType::SymbolicLink,
            0x8000 => FileType::Regular,
            _ => FileType::Regular,
        }
    }

    /// Convert ext2 inode to FileStats
    fn inode_to_stats(&self, inode: &Ext2Inode, inode_num: u32) -> FileStats {
        FileStats {
            file_type: self.get_file_type(inode.mode),
            permissions: inode.mode & 0o777,
            size: inode.size as u64,
            blocks: inode.blocks as u64,
            block_size: self.block_size,
            links_count: inode.links_count as u32,
            access_time: inode.atime as u64,
            modify_time: inode.mtime as u64,
            change_time: inode.ctime as u64,
            user_id: inode.uid as u32,
            group_id: inode.gid as u32,
            device_id: 0,
            inode: inode_num as u64,
        }
    }

    /// Read directory entries
    fn read_directory(&self, inode: &Ext2Inode, superblock: &Ext2Superblock) -> FsResult<Vec<Ext2DirEntry>> {
        let mut entries = Vec::new();
        
        // Placeholder - would read directory blocks and parse entries
        // For now, return some basic entries
        
        Ok(entries)
    }

    /// Parse directory entry
    fn parse_dir_entry(&self, data: &[u8]) -> FsResult<Ext2DirEntry> {
        // Placeholder - would parse actual ext2 directory entry structure
        Ok(Ext2DirEntry {
            inode: 2,
            rec_len: 8,
            name_len: 1,
            name: ".".to_string(),
        })
    }
}

impl FileSystem for Ext2Fs {
    fn init(&self) -> FsResult<()> {
        // Read and validate superblock
        let superblock = self.read_superblock()?;
        
        // Validate ext2 magic number
        if superblock.magic != 0xEF53 {
            return Err(FsError::Corrupted);
        }
        
        // Check for unsupported features
        if superblock.incompatible_features != 0 {
            return Err(FsError::UnsupportedOperation);
        }
        
        // Read block group descriptors
        let _groups = self.read_block_groups(&superblock)?;
        
        Ok(())
    }

    fn mount(&self, _device: Option<&str>) -> FsResult<()> {
        // File system already initialized in new()
        Ok(())
    }

    fn unmount(&self) -> FsResult<()> {
        // Write back superblock and sync to device
        Ok(())
    }

    fn open(&self, path: &str, _flags: OpenFlags) -> FsResult<FileHandle> {
        // Would traverse directory tree to find file
        let superblock = self.read_superblock()?;
        let inode_num = 2; // Root inode placeholder
        
        let inode = self.read_inode(inode_num, &superblock)?;
        let stats = self.inode_to_stats(&inode, inode_num);
        
        Ok(FileHandle {
            path: path.to_string(),
            inode: inode_num as u64,
            flags: _flags,
            offset: 0,
            stats,
        })
    }

    fn close(&self, _handle: &FileHandle) -> FsResult<()> {
        Ok(())
    }

    fn read(&self, _handle: &FileHandle, _buf: &mut [u8]) -> FsResult<usize> {
        // Would read file data using direct/indirect blocks
        Ok(0)
    }

    fn write(&self, _handle: &FileHandle, _buf: &[u8]) -> FsResult<usize> {
        // Would write file data and update blocks
        Ok(0)
    }

    fn seek(&self, _handle: &FileHandle, _offset: i64, _mode: SeekMode) -> FsResult<u64> {
        // Seek through file data using block offsets
        Ok(0)
    }

    fn stat(&self, _path: &str) -> FsResult<FileStats> {
        // Would get file/directory statistics
        let superblock = self.read_superblock()?;
        let inode = self.read_inode(2, &superblock)?;
        Ok(self.inode_to_stats(&inode, 2))
    }

    fn mkdir(&self, _path: &str, _mode: u32) -> FsResult<()> {
        // Create directory entry and allocate inode
        Ok(())
    }

    fn rmdir(&self, _path: &str) -> FsResult<()> {
        // Remove directory and free inode/blocks
        Ok(())
    }

    fn create(&self, _path: &str, _mode: u32) -> FsResult<()> {
        // Create file entry and allocate inode
        Ok(())
    }

    fn unlink(&self, _path: &str) -> FsResult<()> {
        // Remove file entry and free inode
        Ok(())
    }

    fn symlink(&self, _target: &str, _link_path: &str) -> FsResult<()> {
        // Create symbolic link
        Ok(())
    }

    fn readlink(&self, _path: &str) -> FsResult<String> {
        // Read symbolic link target
        Ok(String::new())
    }

    fn rename(&self, _old_path: &str, _new_path: &str) -> FsResult<()> {
        // Update directory entries
        Ok(())
    }

    fn chmod(&self, _path: &str, _mode: u32) -> FsResult<()> {
        // Update inode mode
        Ok(())
    }

    fn chown(&self, _path: &str, _user_id: u32, _group_id: u32) -> FsResult<()> {
        // Update inode uid/gid
        Ok(())
    }

    fn readdir(&self, _path: &str) -> FsResult<Vec<DirEntry>> {
        // Read directory entries and convert
        let superblock = self.read_superblock()?;
        let inode = self.read_inode(2, &superblock)?;
        let dir_entries = self.read_directory(&inode, &superblock)?;
        
        let mut entries = Vec::new();
        for dir_entry in dir_entries {
            entries.push(DirEntry {
                name: dir_entry.name,
                file_type: FileType::Regular, // Would determine actual type
                inode: dir_entry.inode as u64,
                stats: FileStats {
                    file_type: FileType::Regular,
                    permissions: 0o644,
                    size: 0,
                    blocks: 0,
                    block_size: self.block_size,
                    links_count: 1,
                    access_time: 0,
                    modify_time: 0,
                    change_time: 0,
                    user_id: 0,
                    group_id: 0,
                    device_id: 0,
                    inode: dir_entry.inode as u64,
                },
            });
        }
        
        Ok(entries)
    }

    fn fsstat(&self) -> FsResult<FilesystemStats> {
        let superblock = self.read_superblock()?;
        
        Ok(FilesystemStats {
            total_blocks: superblock.total_blocks as u64,
            free_blocks: superblock.free_blocks as u64,
            available_blocks: superblock.free_blocks as u64,
            total_files: (superblock.total_inodes - superblock.free_inodes) as u64,
            free_files: superblock.free_inodes as u64,
            block_size: self.block_size,
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
        // Determine file type from inode mode
        Ok(FileType::Regular)
    }
}