//! ARM64 Direct Boot Loader
//! 
//! This module implements direct hardware boot capabilities for ARM64 (AArch64)
//! architecture supporting both UEFI and direct hardware boot methods.

use crate::{BootError, MemoryMap, MemoryRegion, MemoryType, HardwareInfo};
use log::{info, debug, warn, error};

/// ARM64 boot loader
pub struct ARM64BootLoader {
    info: HardwareInfo,
    memory_map: Option<MemoryMap>,
    boot_mode: ARM64BootMode,
}

/// ARM64 specific boot modes
#[derive(Debug, Clone, Copy)]
pub enum ARM64BootMode {
    /// UEFI boot (ARM64 UEFI)
    UEFI,
    /// ARM Trusted Firmware (ATF) boot
    ATF,
    /// Direct hardware boot (no firmware abstraction)
    Direct,
    /// Boot via ARM boot protocol
    Protocol,
}

impl ARM64BootLoader {
    /// Create new ARM64 boot loader
    pub const fn new(info: HardwareInfo, boot_mode: ARM64BootMode) -> Self {
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
        info!("Starting ARM64 boot sequence in {:?} mode", self.boot_mode);
        
        match self.boot_mode {
            ARM64BootMode::UEFI => self.uefi_boot(),
            ARM64BootMode::ATF => self.atf_boot(),
            ARM64BootMode::Direct => self.direct_boot(),
            ARM64BootMode::Protocol => self.protocol_boot(),
        }
    }

    /// UEFI boot sequence for ARM64
    fn uefi_boot(&mut self) -> Result<(), BootError> {
        info!("Executing ARM64 UEFI boot sequence...");
        
        // Step 1: UEFI system table initialization
        self.init_uefi_system_table()?;
        
        // Step 2: ARM64 specific initialization
        self.init_arm64_uefi_features()?;
        
        // Step 3: Memory detection via UEFI
        self.detect_memory_uefi()?;
        
        // Step 4: Console initialization
        self.init_uefi_console()?;
        
        // Step 5: Load kernel
        self.load_kernel_uefi()?;
        
        info!("ARM64 UEFI boot completed successfully");
        Ok(())
    }

    /// ARM Trusted Firmware boot sequence
    fn atf_boot(&mut self) -> Result<(), BootError> {
        info!("Executing ARM Trusted Firmware boot sequence...");
        
        // Step 1: ATF initialization
        self.init_atf()?;
        
        // Step 2: Secure world initialization
        self.init_secure_world()?;
        
        // Step 3: Non-secure world initialization
        self.init_nonsecure_world()?;
        
        // Step 4: Load kernel
        self.load_kernel_atf()?;
        
        info!("ATF boot completed successfully");
        Ok(())
    }

    /// Direct hardware boot sequence
    fn direct_boot(&mut self) -> Result<(), BootError> {
        info!("Executing ARM64 direct hardware boot sequence...");
        
        // Step 1: ARM64 system registers setup
        self.init_system_registers()?;
        
        // Step 2: Memory management unit (MMU) setup
        self.init_mmu()?;
        
        // Step 3: Exception handling setup
        self.init_exception_handling()?;
        
        // Step 4: Generic Timer initialization
        self.init_generic_timer()?;
        
        // Step 5: GIC initialization
        self.init_gic()?;
        
        // Step 6: Load kernel
        self.load_kernel_direct()?;
        
        info!("ARM64 direct boot completed successfully");
        Ok(())
    }

    /// ARM boot protocol sequence
    fn protocol_boot(&mut self) -> Result<(), BootError> {
        info!("Executing ARM boot protocol sequence...");
        
        // Step 1: ARM boot protocol initialization
        self.init_arm_protocol()?;
        
        // Step 2: Device tree processing
        self.process_device_tree()?;
        
        // Step 3: Load kernel and device tree
        self.load_kernel_protocol()?;
        
        info!("ARM protocol boot completed successfully");
        Ok(())
    }

    // UEFI ARM64 methods
    
    /// Initialize UEFI system table
    fn init_uefi_system_table(&mut self) -> Result<(), BootError> {
        debug!("Initializing ARM64 UEFI system table...");
        
        // Set up UEFI system table pointer
        Ok(())
    }

    /// Initialize ARM64 specific UEFI features
    fn init_arm64_uefi_features(&mut self) -> Result<(), BootError> {
        debug!("Initializing ARM64 UEFI features...");
        
        // ARM64 specific UEFI initialization
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
        debug!("Initializing ARM64 UEFI console...");
        
        // Initialize UEFI console protocols
        Ok(())
    }

    /// Load kernel using UEFI
    fn load_kernel_uefi(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel using ARM64 UEFI...");
        
        Ok(())
    }

    // ATF methods
    
    /// Initialize ARM Trusted Firmware
    fn init_atf(&mut self) -> Result<(), BootError> {
        debug!("Initializing ARM Trusted Firmware...");
        
        // ATF BL1/BL2/BL31 initialization
        Ok(())
    }

    /// Initialize secure world
    fn init_secure_world(&mut self) -> Result<(), BootError> {
        debug!("Initializing secure world...");
        
        // Secure world (EL3) initialization
        Ok(())
    }

    /// Initialize non-secure world
    fn init_nonsecure_world(&mut self) -> Result<(), BootError> {
        debug!("Initializing non-secure world...");
        
        // Non-secure world (EL2/EL1) initialization
        Ok(())
    }

    /// Load kernel via ATF
    fn load_kernel_atf(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel via ATF...");
        
        Ok(())
    }

    // Direct boot methods
    
    /// Initialize ARM64 system registers
    fn init_system_registers(&mut self) -> Result<(), BootError> {
        debug!("Initializing ARM64 system registers...");
        
        // Initialize critical system registers
        self.set_current_el();
        self.set_sctlr();
        self.set_tcr();
        self.set_mair();
        
        Ok(())
    }

    /// Set Current Exception Level
    fn set_current_el(&mut self) {
        debug!("Setting current exception level...");
        
        // Set EL1 (kernel mode)
        #[cfg(target_arch = "aarch64")]
        unsafe {
            asm!("msr DAIFSet, 0x7"); // Disable all interrupts
            asm!("msr CurrentEL, {}", in(reg) 0x1 << 2); // EL1
        }
    }

    /// Set System Control Register (SCTLR)
    fn set_sctlr(&mut self) {
        debug!("Setting System Control Register...");
        
        // Enable MMU, caches, alignment checking
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let sctlr: u64;
            asm!("mrs {}, sctlr_el1", out(reg) sctlr);
            let sctlr = sctlr | (1 << 0) | (1 << 2) | (1 << 12); // M, C, I
            asm!("msr sctlr_el1, {}", in(reg) sctlr);
        }
    }

    /// Set Translation Control Register (TCR)
    fn set_tcr(&mut self) {
        debug!("Setting Translation Control Register...");
        
        // Configure virtual address translation
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let tcr: u64 = (1 << 34) | (1 << 32) | (3 << 16) | (0b1010 << 6); // VA size, IPA size, etc.
            asm!("msr tcr_el1, {}", in(reg) tcr);
        }
    }

    /// Set Memory Attribute Indirection Register (MAIR)
    fn set_mair(&mut self) {
        debug!("Setting Memory Attribute Indirection Register...");
        
        // Set memory attributes
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let mair: u64 = 0x44; // Device-nGnRnE, Normal cacheable
            asm!("msr mair_el1, {}", in(reg) mair);
        }
    }

    /// Initialize Memory Management Unit (MMU)
    fn init_mmu(&mut self) -> Result<(), BootError> {
        debug!("Initializing MMU...");
        
        // Set up page tables
        self.setup_page_tables()?;
        
        // Enable MMU
        self.enable_mmu()?;
        
        Ok(())
    }

    /// Set up page tables
    fn setup_page_tables(&mut self) -> Result<(), BootError> {
        debug!("Setting up ARM64 page tables...");
        
        // Configure EL1 and EL0 page tables
        Ok(())
    }

    /// Enable MMU
    fn enable_mmu(&mut self) -> Result<(), BootError> {
        debug!("Enabling MMU...");
        
        // Enable MMU in SCTLR
        Ok(())
    }

    /// Initialize exception handling
    fn init_exception_handling(&mut self) -> Result<(), BootError> {
        debug!("Initializing exception handling...");
        
        // Set up exception vector table
        self.setup_exception_vectors()?;
        
        // Configure exception handling registers
        Ok(())
    }

    /// Set up exception vectors
    fn setup_exception_vectors(&mut self) -> Result<(), BootError> {
        debug!("Setting up exception vectors...");
        
        // Set up VBAR_EL1
        Ok(())
    }

    /// Initialize Generic Timer
    fn init_generic_timer(&mut self) -> Result<(), BootError> {
        debug!("Initializing ARM64 Generic Timer...");
        
        // Configure CNTFRQ_EL0 (timer frequency)
        self.set_timer_frequency()?;
        
        // Enable system timer
        self.enable_system_timer()?;
        
        Ok(())
    }

    /// Set timer frequency
    fn set_timer_frequency(&mut self) -> Result<(), BootError> {
        debug!("Setting timer frequency...");
        
        // Set CNTFRQ_EL0 to 1GHz (typical ARM64 frequency)
        #[cfg(target_arch = "aarch64")]
        unsafe {
            asm!("msr cntfrq_el0, {}", in(reg) 1_000_000_000u64); // 1 GHz
        }
        
        Ok(())
    }

    /// Enable system timer
    fn enable_system_timer(&mut self) -> Result<(), BootError> {
        debug!("Enabling system timer...");
        
        // Enable system counter
        Ok(())
    }

    /// Initialize Generic Interrupt Controller (GIC)
    fn init_gic(&mut self) -> Result<(), BootError> {
        debug!("Initializing GIC...");
        
        // Initialize GIC v3/v4 if present
        self.init_gicv3()?;
        
        Ok(())
    }

    /// Initialize GICv3
    fn init_gicv3(&mut self) -> Result<(), BootError> {
        debug!("Initializing GICv3...");
        
        // Configure GICv3 interrupt controller
        Ok(())
    }

    // ARM protocol methods
    
    /// Initialize ARM boot protocol
    fn init_arm_protocol(&mut self) -> Result<(), BootError> {
        debug!("Initializing ARM boot protocol...");
        
        // ARM boot protocol initialization
        Ok(())
    }

    /// Process device tree
    fn process_device_tree(&mut self) -> Result<(), BootError> {
        debug!("Processing device tree...");
        
        // Parse and process device tree
        self.parse_device_tree()?;
        
        // Configure hardware based on device tree
        self.configure_hardware_from_dtb()?;
        
        Ok(())
    }

    /// Parse device tree blob
    fn parse_device_tree(&mut self) -> Result<(), BootError> {
        debug!("Parsing device tree blob...");
        
        // Parse device tree structure
        Ok(())
    }

    /// Configure hardware from device tree
    fn configure_hardware_from_dtb(&mut self) -> Result<(), BootError> {
        debug!("Configuring hardware from device tree...");
        
        // Configure devices based on DT
        Ok(())
    }

    /// Load kernel via ARM protocol
    fn load_kernel_protocol(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel via ARM protocol...");
        
        // Load kernel and device tree
        Ok(())
    }

    /// Load kernel using direct boot
    fn load_kernel_direct(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel using ARM64 direct boot...");
        
        self.load_kernel_common()
    }

    /// Load kernel using UEFI
    fn load_kernel_atf(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel via ATF...");
        
        self.load_kernel_common()
    }

    /// Common kernel loading
    fn load_kernel_common(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel from boot device...");
        
        // Read kernel from boot device
        Ok(())
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
    pub const fn boot_mode(&self) -> ARM64BootMode {
        self.boot_mode
    }
}

/// ARM64 specific boot utilities
pub struct ARM64BootUtils;

impl ARM64BootUtils {
    /// Detect ARM64 CPU features
    pub fn detect_cpu_features() -> Vec<String> {
        let mut features = Vec::new();
        
        // Read ARM64 CPU features from system registers
        #[cfg(target_arch = "aarch64")]
        {
            unsafe {
                let mut features_reg: u64;
                asm!("mrs {}, id_aa64pfr0_el1", out(reg) features_reg);
                
                // Parse features from ID_AA64PFR0_EL1
                if (features_reg & 0xF) != 0 {
                    features.push("FP".to_string()); // Floating Point
                }
                if ((features_reg >> 4) & 0xF) != 0 {
                    features.push("ASIMD".to_string()); // Advanced SIMD
                }
                if ((features_reg >> 8) & 0xF) != 0 {
                    features.push("AES".to_string()); // AES instructions
                }
                if ((features_reg >> 12) & 0xF) != 0 {
                    features.push("SHA1".to_string()); // SHA1 instructions
                }
                if ((features_reg >> 16) & 0xF) != 0 {
                    features.push("SHA256".to_string()); // SHA256 instructions
                }
                if ((features_reg >> 20) & 0xF) != 0 {
                    features.push("CRC32".to_string()); // CRC32 instructions
                }
            }
        }
        
        features
    }

    /// Check if running in EL3 (secure monitor)
    pub fn is_el3() -> bool {
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let currentel: u64;
            asm!("mrs {}, CurrentEL", out(reg) currentel);
            (currentel >> 2) == 3
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            false
        }
    }

    /// Check if running in EL2 (hypervisor)
    pub fn is_el2() -> bool {
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let currentel: u64;
            asm!("mrs {}, CurrentEL", out(reg) currentel);
            (currentel >> 2) == 2
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            false
        }
    }

    /// Check if running in EL1 (kernel)
    pub fn is_el1() -> bool {
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let currentel: u64;
            asm!("mrs {}, CurrentEL", out(reg) currentel);
            (currentel >> 2) == 1
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            false
        }
    }

    /// Get current exception level
    pub fn current_el() -> u8 {
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let currentel: u64;
            asm!("mrs {}, CurrentEL", out(reg) currentel);
            (currentel >> 2) as u8
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            0
        }
    }

    /// Check for specific ARM64 feature
    pub fn has_feature(feature: &str) -> bool {
        match feature {
            "fp" => Self::has_fp(),
            "asimd" => Self::has_asimd(),
            "aes" => Self::has_aes(),
            "sha1" => Self::has_sha1(),
            "sha256" => Self::has_sha256(),
            "crc32" => Self::has_crc32(),
            _ => false,
        }
    }

    /// Check for Floating Point support
    pub fn has_fp() -> bool {
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let pfr0: u64;
            asm!("mrs {}, id_aa64pfr0_el1", out(reg) pfr0);
            (pfr0 & 0xF) != 0
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            false
        }
    }

    /// Check for ASIMD support
    pub fn has_asimd() -> bool {
        Self::has_fp() // ASIMD requires FP
    }

    /// Check for AES support
    pub fn has_aes() -> bool {
        #[cfg(target_arch = "aarch64")]
        unsafe {
            let pfr1: u64;
            asm!("mrs {}, id_aa64pfr1_el1", out(reg) pfr1);
            ((pfr1 >> 8) & 0xF) != 0
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            false
        }
    }

    /// Check for SHA1 support
    pub fn has_sha1() -> bool {
        Self::has_aes() // Similar feature register
    }

    /// Check for SHA256 support
    pub fn has_sha256() -> bool {
        Self::has_aes()
    }

    /// Check for CRC32 support
    pub fn has_crc32() -> bool {
        Self::has_aes()
    }
}