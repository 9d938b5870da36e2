//! x86_64 Direct Boot Loader
//! 
//! This module implements direct hardware boot capabilities for x86_64 architecture
//! supporting both UEFI and legacy BIOS boot methods.

use crate::{BootError, MemoryMap, MemoryRegion, MemoryType, HardwareInfo};
use log::{info, debug, warn, error};

/// x86_64 boot loader
pub struct X86_64BootLoader {
    info: HardwareInfo,
    memory_map: Option<MemoryMap>,
    boot_mode: X86BootMode,
}

/// x86_64 specific boot modes
#[derive(Debug, Clone, Copy)]
pub enum X86BootMode {
    /// Legacy BIOS boot
    BIOS,
    /// UEFI boot
    UEFI,
    /// Direct hardware boot (no firmware)
    Direct,
}

impl X86_64BootLoader {
    /// Create new x86_64 boot loader
    pub const fn new(info: HardwareInfo, boot_mode: X86BootMode) -> Self {
        Self {
            info,
            memory_map: None,
            boot_mode,
        }
    }

    /// Set memory map
    pub fn set_memory_map(&mut self, memory_map: MemoryMap) {
        self.memory_map = Some(memory_map);
    }

    /// Execute boot sequence
    pub fn boot(&mut self) -> Result<(), BootError> {
        info!("Starting x86_64 boot sequence in {:?} mode", self.boot_mode);
        
        match self.boot_mode {
            X86BootMode::BIOS => self.bios_boot(),
            X86BootMode::UEFI => self.uefi_boot(),
            X86BootMode::Direct => self.direct_boot(),
        }
    }

    /// Legacy BIOS boot sequence
    fn bios_boot(&mut self) -> Result<(), BootError> {
        info!("Executing BIOS boot sequence...");
        
        // Step 1: BIOS services initialization
        self.init_bios_services()?;
        
        // Step 2: Memory detection (e820)
        self.detect_memory_bios()?;
        
        // Step 3: Video initialization
        self.init_video_bios()?;
        
        // Step 4: Keyboard initialization
        self.init_keyboard_bios()?;
        
        // Step 5: Load kernel
        self.load_kernel_bios()?;
        
        info!("BIOS boot completed successfully");
        Ok(())
    }

    /// UEFI boot sequence
    fn uefi_boot(&mut self) -> Result<(), BootError> {
        info!("Executing UEFI boot sequence...");
        
        // Step 1: UEFI system table setup
        self.init_uefi_system_table()?;
        
        // Step 2: Memory detection
        self.detect_memory_uefi()?;
        
        // Step 3: Console initialization
        self.init_uefi_console()?;
        
        // Step 4: Load kernel
        self.load_kernel_uefi()?;
        
        info!("UEFI boot completed successfully");
        Ok(())
    }

    /// Direct hardware boot sequence
    fn direct_boot(&mut self) -> Result<(), BootError> {
        info!("Executing direct hardware boot sequence...");
        
        // Step 1: Direct hardware initialization
        self.init_direct_hardware()?;
        
        // Step 2: Direct memory management
        self.init_direct_memory()?;
        
        // Step 3: Direct device access
        self.init_direct_devices()?;
        
        // Step 4: Load kernel
        self.load_kernel_direct()?;
        
        info!("Direct boot completed successfully");
        Ok(())
    }

    // BIOS boot methods
    
    /// Initialize BIOS services
    fn init_bios_services(&mut self) -> Result<(), BootError> {
        debug!("Initializing BIOS services...");
        
        // Save boot parameters
        self.save_boot_params_bios()?;
        
        Ok(())
    }

    /// Detect memory using BIOS e820
    fn detect_memory_bios(&mut self) -> Result<(), BootError> {
        debug!("Detecting memory using BIOS e820...");
        
        // Call BIOS int 15h, function e820h
        let memory_map = self.e820_memory_detection()?;
        self.memory_map = Some(memory_map);
        
        Ok(())
    }

    /// BIOS memory detection using e820
    fn e820_memory_detection(&self) -> Result<MemoryMap, BootError> {
        let mut regions = Vec::new();
        
        // BIOS e820 implementation
        // This would use inline assembly to call BIOS interrupt
        
        regions.push(MemoryRegion {
            start: 0x0000000000000000,
            size: 0x000000000000A000,
            region_type: MemoryType::Usable,
        });
        
        regions.push(MemoryRegion {
            start: 0x00000000000A0000,
            size: 0x0000000000060000,
            region_type: MemoryType::Reserved,
        });
        
        Ok(MemoryMap { regions })
    }

    /// Initialize video using BIOS
    fn init_video_bios(&mut self) -> Result<(), BootError> {
        debug!("Initializing video using BIOS...");
        
        // Use BIOS video services
        Ok(())
    }

    /// Initialize keyboard using BIOS
    fn init_keyboard_bios(&mut self) -> Result<(), BootError> {
        debug!("Initializing keyboard using BIOS...");
        
        // Use BIOS keyboard services
        Ok(())
    }

    /// Save boot parameters from BIOS
    fn save_boot_params_bios(&mut self) -> Result<(), BootError> {
        debug!("Saving BIOS boot parameters...");
        
        // Save memory map, drive info, etc.
        Ok(())
    }

    /// Load kernel using BIOS
    fn load_kernel_bios(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel using BIOS...");
        
        // Read kernel from boot device
        self.load_kernel_from_device()?;
        
        Ok(())
    }

    // UEFI boot methods
    
    /// Initialize UEFI system table
    fn init_uefi_system_table(&mut self) -> Result<(), BootError> {
        debug!("Initializing UEFI system table...");
        
        // Get UEFI system table pointer
        Ok(())
    }

    /// Detect memory using UEFI
    fn detect_memory_uefi(&mut self) -> Result<(), BootError> {
        debug!("Detecting memory using UEFI...");
        
        // Use UEFI memory map services
        Ok(())
    }

    /// Initialize UEFI console
    fn init_uefi_console(&mut self) -> Result<(), BootError> {
        debug!("Initializing UEFI console...");
        
        // Initialize Simple Text Output Protocol
        Ok(())
    }

    /// Load kernel using UEFI
    fn load_kernel_uefi(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel using UEFI...");
        
        // Use UEFI file system services
        Ok(())
    }

    // Direct boot methods
    
    /// Initialize direct hardware
    fn init_direct_hardware(&mut self) -> Result<(), BootError> {
        debug!("Initializing direct hardware...");
        
        // Direct hardware initialization without firmware
        self.init_direct_cpu()?;
        self.init_direct_chipset()?;
        self.init_direct_pci()?;
        
        Ok(())
    }

    /// Initialize direct CPU features
    fn init_direct_cpu(&mut self) -> Result<(), BootError> {
        debug!("Initializing CPU features...");
        
        // Enable features like SSE, AVX, etc.
        Ok(())
    }

    /// Initialize direct chipset
    fn init_direct_chipset(&mut self) -> Result<(), BootError> {
        debug!("Initializing chipset...");
        
        // Direct chipset initialization
        Ok(())
    }

    /// Initialize direct PCI
    fn init_direct_pci(&mut self) -> Result<(), BootError> {
        debug!("Initializing PCI...");
        
        // Direct PCI initialization
        Ok(())
    }

    /// Initialize direct memory management
    fn init_direct_memory(&mut self) -> Result<(), BootError> {
        debug!("Initializing direct memory management...");
        
        // Direct memory initialization
        self.init_page_tables()?;
        self.enable_paging()?;
        
        Ok(())
    }

    /// Initialize page tables for direct boot
    fn init_page_tables(&mut self) -> Result<(), BootError> {
        debug!("Initializing page tables...");
        
        // Set up identity mapping and kernel space
        Ok(())
    }

    /// Enable paging
    fn enable_paging(&mut self) -> Result<(), BootError> {
        debug!("Enabling paging...");
        
        // Enable CR4.PGE and CR0.PG
        Ok(())
    }

    /// Initialize direct devices
    fn init_direct_devices(&mut self) -> Result<(), BootError> {
        debug!("Initializing direct devices...");
        
        // Direct device initialization
        self.init_serial_direct()?;
        self.init_vga_direct()?;
        self.init_keyboard_direct()?;
        self.init_timer_direct()?;
        
        Ok(())
    }

    /// Initialize serial port directly
    fn init_serial_direct(&mut self) -> Result<(), BootError> {
        debug!("Initializing serial port...");
        
        // Direct 16550 UART initialization
        Ok(())
    }

    /// Initialize VGA directly
    fn init_vga_direct(&mut self) -> Result<(), BootError> {
        debug!("Initializing VGA...");
        
        // Direct VGA initialization
        Ok(())
    }

    /// Initialize keyboard directly
    fn init_keyboard_direct(&mut self) -> Result<(), BootError> {
        debug!("Initializing keyboard...");
        
        // Direct keyboard controller initialization
        Ok(())
    }

    /// Initialize timer directly
    fn init_timer_direct(&mut self) -> Result<(), BootError> {
        debug!("Initializing timer...");
        
        // Direct timer initialization (PIT/APIC)
        Ok(())
    }

    /// Load kernel from device (common method)
    fn load_kernel_from_device(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel from boot device...");
        
        // Read kernel from boot device
        // This would be device-specific implementation
        
        Ok(())
    }

    /// Load kernel using direct boot
    fn load_kernel_direct(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel using direct boot...");
        
        self.load_kernel_from_device()
    }

    /// Get boot information
    pub const fn boot_info(&self) -> &HardwareInfo {
        &self.info
    }

    /// Get memory map
    pub const fn memory_map(&self) -> Option<&MemoryMap> {
        self.memory_map.as_ref()
    }

    /// Get boot mode
    pub const fn boot_mode(&self) -> X86BootMode {
        self.boot_mode
    }
}

/// x86_64 specific boot utilities
pub struct X86BootUtils;

impl X86BootUtils {
    /// Detect CPU features
    pub fn detect_cpu_features() -> Vec<String> {
        let mut features = Vec::new();
        
        // CPUID-based feature detection
        // This would use inline assembly to get CPU features
        
        features
    }

    /// Check for 64-bit support
    pub fn has_64bit_support() -> bool {
        // Check CPUID for 64-bit support
        #[cfg(target_arch = "x86_64")]
        {
            true // x86_64 always has 64-bit support
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            false
        }
    }

    /// Check for specific CPU features
    pub fn has_feature(feature: &str) -> bool {
        // Check for specific CPU features like SSE, AVX, etc.
        match feature {
            "sse" => Self::has_sse(),
            "sse2" => Self::has_sse2(),
            "avx" => Self::has_avx(),
            "avx2" => Self::has_avx2(),
            _ => false,
        }
    }

    /// Check for SSE support
    pub fn has_sse() -> bool {
        // Check CPUID for SSE support
        false // Implement actual check
    }

    /// Check for SSE2 support
    pub fn has_sse2() -> bool {
        false
    }

    /// Check for AVX support
    pub fn has_avx() -> bool {
        false
    }

    /// Check for AVX2 support
    pub fn has_avx2() -> bool {
        false
    }
}