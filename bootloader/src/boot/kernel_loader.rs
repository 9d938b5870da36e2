//! Kernel Loading and Boot Protocol
//! 
//! This module provides the main kernel loading functionality, including
//! loading compressed/uncompressed kernels, transitioning to long mode,
//! and creating boot information structures.

use crate::boot::multiboot2::{Multiboot2Info, KernelBootInfo, Multiboot2Error};
use crate::boot::decompression::{KernelDecompressor, KernelImageInfo, DecompressionError, CompressionAlgorithm};
use crate::BootConfig;
use core::slice;
use core::mem;

const KERNEL_LOAD_ADDRESS: u64 = 0x1000000; // 16MB
const KERNEL_STACK_SIZE: u64 = 0x10000; // 64KB

/// Load kernel result
pub type LoadKernelResult<T> = Result<T, KernelLoadError>;

/// Kernel loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelLoadError {
    KernelNotFound,
    InvalidKernelFormat,
    DecompressionFailed,
    MemoryAllocationFailed,
    LongModeTransitionFailed,
    BootInfoCreationFailed,
    InvalidBootConfiguration,
    UnsupportedKernelType,
}

/// Boot process result
#[derive(Debug, Clone, Copy)]
pub struct BootProcessResult {
    pub kernel_loaded: bool,
    pub kernel_address: u64,
    pub boot_info_addr: u64,
    pub entry_point: u64,
    pub mode_transition: TransitionMode,
}

/// Mode transition information
#[derive(Debug, Clone, Copy)]
pub enum TransitionMode {
    LegacyBIOS,
    UEFI,
    DirectLongMode,
}

/// Kernel loading and boot information
pub struct KernelLoader {
    decompressor: KernelDecompressor,
    kernel_buffer: Option<&'static mut [u8]>,
    boot_info: Option<KernelBootInfo>,
    current_config: Option<BootConfig>,
}

impl KernelLoader {
    /// Create new kernel loader
    pub const fn new() -> Self {
        Self {
            decompressor: KernelDecompressor::new(),
            kernel_buffer: None,
            boot_info: None,
            current_config: None,
        }
    }

    /// Initialize kernel loader with boot configuration
    pub fn init(&mut self, config: BootConfig) -> LoadKernelResult<()> {
        info!("Initializing kernel loader...");
        
        // Validate configuration
        if config.kernel_path.is_empty() {
            return Err(KernelLoadError::InvalidBootConfiguration);
        }

        self.current_config = Some(config);
        
        // Allocate buffer for kernel loading
        self.allocate_kernel_buffer()?;
        
        Ok(())
    }

    /// Load kernel from the specified path
    pub fn load_kernel(&mut self, kernel_data: &[u8]) -> LoadKernelResult<KernelImageInfo> {
        info!("Loading kernel ({} bytes)", kernel_data.len());
        
        // Load kernel image and get info
        let kernel_info = self.decompressor.load_kernel_image(kernel_data)
            .map_err(|e| {
                error!("Failed to load kernel image: {:?}", e);
                match e {
                    DecompressionError::InvalidMagic => KernelLoadError::InvalidKernelFormat,
                    DecompressionError::UnsupportedCompression => KernelLoadError::UnsupportedKernelType,
                    _ => KernelLoadError::InvalidKernelFormat,
                }
            })?;

        info!("Kernel loaded: {} bytes, compressed: {}", 
              kernel_info.size, kernel_info.is_compressed);

        // If kernel is compressed, decompress it
        if kernel_info.is_compressed {
            self.decompress_kernel(kernel_data)?;
        } else {
            // For uncompressed kernels, just validate and copy
            self.validate_uncompressed_kernel(kernel_data)?;
        }

        Ok(kernel_info)
    }

    /// Decompress kernel if needed
    fn decompress_kernel(&mut self, kernel_data: &[u8]) -> LoadKernelResult<()> {
        info!("Decompressing kernel...");
        
        let required_size = self.decompressor.get_decompression_buffer_size(kernel_data)
            .map_err(|_| KernelLoadError::MemoryAllocationFailed)?;
        
        if let Some(buffer) = self.kernel_buffer.as_mut() {
            if buffer.len() < required_size {
                return Err(KernelLoadError::MemoryAllocationFailed);
            }

            let decompressed_size = self.decompressor.decompress_kernel(kernel_data, buffer)
                .map_err(|e| {
                    error!("Decompression failed: {:?}", e);
                    KernelLoadError::DecompressionFailed
                })?;

            info!("Kernel decompressed successfully: {} bytes", decompressed_size);
            Ok(())
        } else {
            Err(KernelLoadError::MemoryAllocationFailed)
        }
    }

    /// Validate uncompressed kernel
    fn validate_uncompressed_kernel(&mut self, kernel_data: &[u8]) -> LoadKernelResult<()> {
        info!("Validating uncompressed kernel...");
        
        // Validate that we have enough space in the buffer
        if let Some(buffer) = self.kernel_buffer.as_mut() {
            if kernel_data.len() > buffer.len() {
                return Err(KernelLoadError::MemoryAllocationFailed);
            }

            // Copy kernel to buffer
            buffer[..kernel_data.len()].copy_from_slice(kernel_data);
            
            // TODO: Add additional validation (checksum, signature, etc.)
            
            info!("Kernel copied to buffer successfully");
            Ok(())
        } else {
            Err(KernelLoadError::MemoryAllocationFailed)
        }
    }

    /// Allocate kernel loading buffer
    fn allocate_kernel_buffer(&mut self) -> LoadKernelResult<()> {
        info!("Allocating kernel buffer...");
        
        // For now, we'll use a static allocation
        // In a real implementation, this would allocate from available memory
        const BUFFER_SIZE: usize = 16 * 1024 * 1024; // 16MB buffer
        
        // Create a static buffer (this would be improved in a real implementation)
        static mut KERNEL_BUFFER: [u8; BUFFER_SIZE] = [0; BUFFER_SIZE];
        
        unsafe {
            self.kernel_buffer = Some(slice::from_raw_parts_mut(
                KERNEL_BUFFER.as_mut_ptr(),
                BUFFER_SIZE
            ));
        }
        
        info!("Kernel buffer allocated: {} bytes", BUFFER_SIZE);
        Ok(())
    }

    /// Create boot information structure
    pub fn create_boot_info(&mut self, kernel_info: &KernelImageInfo, multiboot2_info: Option<Multiboot2Info>) -> LoadKernelResult<u64> {
        info!("Creating boot information...");
        
        // Create boot information from available sources
        let boot_info = if let Some(mb2_info) = multiboot2_info {
            mb2_info.to_kernel_boot_info()
        } else {
            self.create_minimal_boot_info(kernel_info)
        };

        // Store boot info
        self.boot_info = Some(boot_info);

        // Allocate boot information structure in memory
        let boot_info_addr = self.allocate_boot_info_structure()?;
        
        Ok(boot_info_addr)
    }

    /// Create minimal boot information structure
    fn create_minimal_boot_info(&self, kernel_info: &KernelImageInfo) -> KernelBootInfo {
        // Create minimal boot information for testing
        KernelBootInfo {
            boot_time: 0, // TODO: Get actual boot time
            memory_map: vec![
                crate::boot::multiboot2::MemoryMapEntry {
                    base_addr: 0x0,
                    length: 0x9FC00, // Conventional memory
                    entry_type: crate::boot::multiboot2::MemoryType::Available,
                },
                crate::boot::multiboot2::MemoryMapEntry {
                    base_addr: 0x100000, // Extended memory
                    length: 0x7EE00000,
                    entry_type: crate::boot::multiboot2::MemoryType::Available,
                },
            ],
            command_line: self.current_config.as_ref().and_then(|c| c.command_line),
            modules: Vec::new(),
            framebuffer: None,
        }
    }

    /// Allocate boot information structure in memory
    fn allocate_boot_info_structure(&self) -> LoadKernelResult<u64> {
        const BOOT_INFO_SIZE: usize = 1024; // 1KB for boot info
        
        static mut BOOT_INFO_MEMORY: [u8; BOOT_INFO_SIZE] = [0; BOOT_INFO_SIZE];
        
        unsafe {
            let addr = BOOT_INFO_MEMORY.as_mut_ptr() as u64;
            info!("Boot info allocated at: 0x{:X}", addr);
            Ok(addr)
        }
    }

    /// Transition to kernel (long mode entry)
    pub fn transition_to_kernel(&self, kernel_info: &KernelImageInfo, boot_info_addr: u64) -> ! {
        info!("Transitioning to kernel at address 0x{:X}", kernel_info.entry_point);
        info!("Boot info at address: 0x{:X}", boot_info_addr);
        
        // Prepare transition
        self.prepare_long_mode_transition(kernel_info, boot_info_addr);
        
        // Jump to kernel entry point
        unsafe {
            let entry_point = kernel_info.entry_point as *const ();
            let boot_info_ptr = boot_info_addr as *const ();
            
            core::arch::asm!(
                "mov rdi, {}",           // Pass boot info as first argument
                "mov rax, {}",           // Set entry point in RAX
                "jmp rax",               // Jump to kernel entry
                in(reg) boot_info_ptr,
                in(reg) entry_point
            );
        }
    }

    /// Prepare for long mode transition
    fn prepare_long_mode_transition(&self, kernel_info: &KernelImageInfo, boot_info_addr: u64) {
        // This function would set up the final state before jumping to kernel
        // Including setting up proper page tables, registers, etc.
        
        info!("Preparing long mode transition...");
        
        // Verify kernel address is valid
        if kernel_info.load_address == 0 || kernel_info.entry_point == 0 {
            panic!("Invalid kernel addresses - load: 0x{:X}, entry: 0x{:X}", 
                   kernel_info.load_address, kernel_info.entry_point);
        }

        // Set up stack pointer (in a real implementation)
        let stack_addr = KERNEL_LOAD_ADDRESS + KERNEL_STACK_SIZE;
        info!("Kernel stack will be at: 0x{:X}", stack_addr);
    }

    /// Get loaded kernel buffer
    pub fn get_kernel_buffer(&self) -> Option<&'static mut [u8]> {
        self.kernel_buffer
    }

    /// Get current boot information
    pub fn get_boot_info(&self) -> Option<&KernelBootInfo> {
        self.boot_info.as_ref()
    }

    /// Complete boot process
    pub fn complete_boot(&mut self, kernel_info: &KernelImageInfo, boot_info_addr: u64) -> BootProcessResult {
        BootProcessResult {
            kernel_loaded: true,
            kernel_address: kernel_info.load_address,
            boot_info_addr,
            entry_point: kernel_info.entry_point,
            mode_transition: TransitionMode::DirectLongMode,
        }
    }
}

/// Main boot entry function
pub fn boot_main(multiboot2_info_ptr: u32) -> ! {
    use crate::{boot_start, get_boot_config};
    use crate::boot::multiboot2::Multiboot2Info;
    
    info!("Starting MultiOS boot process...");
    info!("Multiboot2 info pointer: 0x{:X}", multiboot2_info_ptr);
    
    // Create kernel loader
    let mut loader = KernelLoader::new();
    
    // Get boot configuration
    let config = get_boot_config();
    
    // Initialize loader
    if let Err(e) = loader.init(config) {
        error!("Failed to initialize kernel loader: {:?}", e);
        panic!("Bootloader initialization failed");
    }
    
    // Parse Multiboot2 information if available
    let mb2_info = if multiboot2_info_ptr != 0 {
        let info_ptr = multiboot2_info_ptr as *const u8;
        match Multiboot2Info::parse(info_ptr) {
            Ok(info) => {
                info!("Successfully parsed Multiboot2 boot information");
                Some(info)
            }
            Err(e) => {
                warn!("Failed to parse Multiboot2 info: {:?}", e);
                None
            }
        }
    } else {
        warn!("No Multiboot2 information available");
        None
    };
    
    // Load kernel (this would be implemented based on actual kernel loading)
    let kernel_data = &[0u8; 1024]; // Placeholder for actual kernel loading
    let kernel_info = match loader.load_kernel(kernel_data) {
        Ok(info) => info,
        Err(e) => {
            error!("Failed to load kernel: {:?}", e);
            panic!("Kernel loading failed");
        }
    };
    
    // Create boot information
    let boot_info_addr = match loader.create_boot_info(&kernel_info, mb2_info) {
        Ok(addr) => addr,
        Err(e) => {
            error!("Failed to create boot info: {:?}", e);
            panic!("Boot info creation failed");
        }
    };
    
    info!("Boot process completed successfully");
    info!("Kernel loaded at: 0x{:X}, entry: 0x{:X}", 
          kernel_info.load_address, kernel_info.entry_point);
    
    // Transition to kernel (this will not return)
    loader.transition_to_kernel(&kernel_info, boot_info_addr);
}

/// Main 64-bit boot entry function
#[no_mangle]
pub extern "C" fn boot_main_64bit(multiboot2_info_ptr: u32) -> ! {
    info!("64-bit boot process starting...");
    boot_main(multiboot2_info_ptr)
}

/// Create Multiboot2 boot information
#[no_mangle]
pub extern "C" fn create_multiboot2_info() -> u64 {
    // This function creates the boot information structure
    // that will be passed to the kernel
    
    const BOOT_INFO_SIZE: usize = 1024;
    static mut BOOT_INFO_MEMORY: [u8; BOOT_INFO_SIZE] = [0; BOOT_INFO_SIZE];
    
    unsafe {
        let addr = BOOT_INFO_MEMORY.as_mut_ptr() as u64;
        info!("Created boot info structure at: 0x{:X}", addr);
        addr
    }
}

/// Enter kernel with boot information
pub fn enter_kernel(boot_info: u64) -> ! {
    info!("Entering kernel with boot info: 0x{:X}", boot_info);
    
    // This function would transition from bootloader to kernel
    // The actual transition is handled by the assembly code
    
    loop {
        unsafe {
            core::arch::asm!("hlt");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_loader_creation() {
        let loader = KernelLoader::new();
        assert!(loader.kernel_buffer.is_none());
        assert!(loader.boot_info.is_none());
        assert!(loader.current_config.is_none());
    }

    #[test]
    fn test_boot_process_result() {
        let result = BootProcessResult {
            kernel_loaded: true,
            kernel_address: 0x1000000,
            boot_info_addr: 0x2000000,
            entry_point: 0x1000000,
            mode_transition: TransitionMode::DirectLongMode,
        };
        
        assert!(result.kernel_loaded);
        assert_eq!(result.kernel_address, 0x1000000);
    }

    #[test]
    fn test_minimal_boot_info_creation() {
        let loader = KernelLoader::new();
        let kernel_info = KernelImageInfo {
            load_address: 0x1000000,
            entry_point: 0x1000000,
            size: 1024,
            is_compressed: false,
            compression_type: CompressionAlgorithm::Uncompressed,
            flags: crate::boot::decompression::KernelImageFlags::empty(),
        };
        
        let boot_info = loader.create_minimal_boot_info(&kernel_info);
        assert_eq!(boot_info.memory_map.len(), 2);
    }
}