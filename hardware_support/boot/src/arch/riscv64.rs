//! RISC-V64 Direct Boot Loader
//! 
//! This module implements direct hardware boot capabilities for RISC-V64
//! architecture supporting both UEFI and direct hardware boot methods.

use crate::{BootError, MemoryMap, MemoryRegion, MemoryType, HardwareInfo};
use log::{info, debug, warn, error};

/// RISC-V64 boot loader
pub struct RISC_VBootLoader {
    info: HardwareInfo,
    memory_map: Option<MemoryMap>,
    boot_mode: RISCBootMode,
}

/// RISC-V specific boot modes
#[derive(Debug, Clone, Copy)]
pub enum RISCBootMode {
    /// UEFI boot (RISC-V UEFI)
    UEFI,
    /// OpenSBI boot
    OpenSBI,
    /// Direct hardware boot (no firmware abstraction)
    Direct,
    /// Boot via RISC-V boot protocol
    Protocol,
}

impl RISC_VBootLoader {
    /// Create new RISC-V boot loader
    pub const fn new(info: HardwareInfo, boot_mode: RISCBootMode) -> Self {
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
        info!("Starting RISC-V boot sequence in {:?} mode", self.boot_mode);
        
        match self.boot_mode {
            RISCBootMode::UEFI => self.uefi_boot(),
            RISCBootMode::OpenSBI => self.opensbi_boot(),
            RISCBootMode::Direct => self.direct_boot(),
            RISCBootMode::Protocol => self.protocol_boot(),
        }
    }

    /// UEFI boot sequence for RISC-V
    fn uefi_boot(&mut self) -> Result<(), BootError> {
        info!("Executing RISC-V UEFI boot sequence...");
        
        // Step 1: UEFI system table initialization
        self.init_uefi_system_table()?;
        
        // Step 2: RISC-V specific initialization
        self.init_riscv_uefi_features()?;
        
        // Step 3: Memory detection via UEFI
        self.detect_memory_uefi()?;
        
        // Step 4: Console initialization
        self.init_uefi_console()?;
        
        // Step 5: Load kernel
        self.load_kernel_uefi()?;
        
        info!("RISC-V UEFI boot completed successfully");
        Ok(())
    }

    /// OpenSBI boot sequence
    fn opensbi_boot(&mut self) -> Result<(), BootError> {
        info!("Executing OpenSBI boot sequence...");
        
        // Step 1: OpenSBI initialization
        self.init_opensbi()?;
        
        // Step 2: Supervisor binary interface setup
        self.setup_sbi_interface()?;
        
        // Step 3: Hart (CPU core) initialization
        self.init_hart()?;
        
        // Step 4: Device initialization
        self.init_devices()?;
        
        // Step 5: Load kernel
        self.load_kernel_opensbi()?;
        
        info!("OpenSBI boot completed successfully");
        Ok(())
    }

    /// Direct hardware boot sequence
    fn direct_boot(&mut self) -> Result<(), BootError> {
        info!("Executing RISC-V direct hardware boot sequence...");
        
        // Step 1: RISC-V system setup
        self.init_riscv_system()?;
        
        // Step 2: Privilege level configuration
        self.configure_privilege_levels()?;
        
        // Step 3: Memory management unit (MMU) setup
        self.init_satp()?;
        
        // Step 4: Interrupt handling setup
        self.init_interrupt_handling()?;
        
        // Step 5: Timer initialization
        self.init_riscv_timer()?;
        
        // Step 6: Load kernel
        self.load_kernel_direct()?;
        
        info!("RISC-V direct boot completed successfully");
        Ok(())
    }

    /// RISC-V boot protocol sequence
    fn protocol_boot(&mut self) -> Result<(), BootError> {
        info!("Executing RISC-V boot protocol sequence...");
        
        // Step 1: RISC-V boot protocol initialization
        self.init_riscv_protocol()?;
        
        // Step 2: Device tree processing
        self.process_device_tree()?;
        
        // Step 3: Load kernel and device tree
        self.load_kernel_protocol()?;
        
        info!("RISC-V protocol boot completed successfully");
        Ok(())
    }

    // UEFI RISC-V methods
    
    /// Initialize UEFI system table
    fn init_uefi_system_table(&mut self) -> Result<(), BootError> {
        debug!("Initializing RISC-V UEFI system table...");
        
        // Set up UEFI system table pointer
        Ok(())
    }

    /// Initialize RISC-V specific UEFI features
    fn init_riscv_uefi_features(&mut self) -> Result<(), BootError> {
        debug!("Initializing RISC-V UEFI features...");
        
        // RISC-V specific UEFI initialization
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
        debug!("Initializing RISC-V UEFI console...");
        
        // Initialize UEFI console protocols
        Ok(())
    }

    /// Load kernel using UEFI
    fn load_kernel_uefi(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel using RISC-V UEFI...");
        
        Ok(())
    }

    // OpenSBI methods
    
    /// Initialize OpenSBI
    fn init_opensbi(&mut self) -> Result<(), BootError> {
        debug!("Initializing OpenSBI...");
        
        // OpenSBI initialization
        Ok(())
    }

    /// Setup Supervisor Binary Interface
    fn setup_sbi_interface(&mut self) -> Result<(), BootError> {
        debug!("Setting up SBI interface...");
        
        // Configure SBI environment
        Ok(())
    }

    /// Initialize hart (CPU core)
    fn init_hart(&mut self) -> Result<(), BootError> {
        debug!("Initializing hart...");
        
        // Configure current hart
        self.configure_current_hart()?;
        
        Ok(())
    }

    /// Configure current hart
    fn configure_current_hart(&mut self) -> Result<(), BootError> {
        debug!("Configuring current hart...");
        
        // Configure M-mode registers
        self.set_mstatus()?;
        self.set_mie()?;
        self.set_mtvec()?;
        
        Ok(())
    }

    /// Set Machine Status Register (MSTATUS)
    fn set_mstatus(&mut self) -> Result<(), BootError> {
        debug!("Setting MSTATUS...");
        
        // Enable interrupts, set privilege levels
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let mstatus: u64 = 0x0000000000000000; // Configure as needed
            asm!("csrw mstatus, {}", in(reg) mstatus);
        }
        
        Ok(())
    }

    /// Set Machine Interrupt Enable (MIE)
    fn set_mie(&mut self) -> Result<(), BootError> {
        debug!("Setting MIE...");
        
        // Enable specific interrupts
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let mie: u64 = 0x0000000000000000; // Enable specific interrupts
            asm!("csrw mie, {}", in(reg) mie);
        }
        
        Ok(())
    }

    /// Set Machine Trap Vector (MTVEC)
    fn set_mtvec(&mut self) -> Result<(), BootError> {
        debug!("Setting MTVEC...");
        
        // Set trap vector base address
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let mtvec: u64 = 0x0000000000000000; // Set trap vector address
            asm!("csrw mtvec, {}", in(reg) mtvec);
        }
        
        Ok(())
    }

    /// Initialize devices
    fn init_devices(&mut self) -> Result<(), BootError> {
        debug!("Initializing RISC-V devices...");
        
        // Initialize PLIC, CLINT, etc.
        self.init_plic()?;
        self.init_clint()?;
        
        Ok(())
    }

    /// Initialize Platform Level Interrupt Controller (PLIC)
    fn init_plic(&mut self) -> Result<(), BootError> {
        debug!("Initializing PLIC...");
        
        // Configure PLIC
        Ok(())
    }

    /// Initialize Core Local Interruptor (CLINT)
    fn init_clint(&mut self) -> Result<(), BootError> {
        debug!("Initializing CLINT...");
        
        // Configure CLINT for timer and software interrupts
        Ok(())
    }

    /// Load kernel via OpenSBI
    fn load_kernel_opensbi(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel via OpenSBI...");
        
        Ok(())
    }

    // Direct boot methods
    
    /// Initialize RISC-V system
    fn init_riscv_system(&mut self) -> Result<(), BootError> {
        debug!("Initializing RISC-V system...");
        
        // Initialize M-mode system
        self.init_machine_mode()?;
        
        Ok(())
    }

    /// Initialize machine mode
    fn init_machine_mode(&mut self) -> Result<(), BootError> {
        debug!("Initializing machine mode...");
        
        // Set up machine mode environment
        Ok(())
    }

    /// Configure privilege levels
    fn configure_privilege_levels(&mut self) -> Result<(), BootError> {
        debug!("Configuring privilege levels...");
        
        // Configure privilege levels for S-mode and U-mode
        Ok(())
    }

    /// Initialize Supervisor Address Translation and Protection (SATP)
    fn init_satp(&mut self) -> Result<(), BootError> {
        debug!("Initializing SATP...");
        
        // Set up virtual memory translation
        self.setup_page_tables()?;
        self.enable_sv39()?;
        
        Ok(())
    }

    /// Set up page tables
    fn setup_page_tables(&mut self) -> Result<(), BootError> {
        debug!("Setting up RISC-V page tables...");
        
        // Configure SV39/SV48 page tables
        Ok(())
    }

    /// Enable SV39 virtual memory
    fn enable_sv39(&mut self) -> Result<(), BootError> {
        debug!("Enabling SV39...");
        
        // Enable virtual memory in SATP
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let satp: u64 = 0x0000000000000000; // Configure page table address
            asm!("csrw satp, {}", in(reg) satp);
        }
        
        Ok(())
    }

    /// Initialize interrupt handling
    fn init_interrupt_handling(&mut self) -> Result<(), BootError> {
        debug!("Initializing interrupt handling...");
        
        // Set up interrupt handling for S-mode
        self.setup_supervisor_interrupts()?;
        
        Ok(())
    }

    /// Setup supervisor mode interrupts
    fn setup_supervisor_interrupts(&mut self) -> Result<(), BootError> {
        debug!("Setting up supervisor interrupts...");
        
        // Configure SIE, STVEC, etc.
        Ok(())
    }

    /// Initialize RISC-V timer
    fn init_riscv_timer(&mut self) -> Result<(), BootError> {
        debug!("Initializing RISC-V timer...");
        
        // Set up timer interrupts
        self.set_time_interrupt()?;
        self.enable_timer_interrupts()?;
        
        Ok(())
    }

    /// Set time interrupt
    fn set_time_interrupt(&mut self) -> Result<(), BootError> {
        debug!("Setting time interrupt...");
        
        // Set time compare register
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let timecmp: u64 = 0x0000000000000000; // Set timeout
            asm!("csrw mtimecmp, {}", in(reg) timecmp);
        }
        
        Ok(())
    }

    /// Enable timer interrupts
    fn enable_timer_interrupts(&mut self) -> Result<(), BootError> {
        debug!("Enabling timer interrupts...");
        
        // Enable timer interrupt in MIE
        Ok(())
    }

    // RISC-V protocol methods
    
    /// Initialize RISC-V boot protocol
    fn init_riscv_protocol(&mut self) -> Result<(), BootError> {
        debug!("Initializing RISC-V boot protocol...");
        
        // RISC-V boot protocol initialization
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

    /// Load kernel via RISC-V protocol
    fn load_kernel_protocol(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel via RISC-V protocol...");
        
        // Load kernel and device tree
        Ok(())
    }

    /// Load kernel using direct boot
    fn load_kernel_direct(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel using RISC-V direct boot...");
        
        self.load_kernel_common()
    }

    /// Load kernel using OpenSBI
    fn load_kernel_opensbi(&mut self) -> Result<(), BootError> {
        debug!("Loading kernel via OpenSBI...");
        
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
    pub const fn boot_mode(&self) -> RISCBootMode {
        self.boot_mode
    }
}

/// RISC-V specific boot utilities
pub struct RISCBootUtils;

impl RISCBootUtils {
    /// Detect RISC-V CPU features
    pub fn detect_cpu_features() -> Vec<String> {
        let mut features = Vec::new();
        
        // Read RISC-V CPU features from misa and other CSR registers
        #[cfg(target_arch = "riscv64")]
        {
            unsafe {
                let mut misa: u64;
                asm!("csrr {}, misa", out(reg) misa);
                
                // Parse ISA extensions from MISA
                if (misa >> 0) & 1 != 0 { features.push("A".to_string()); } // Atomic
                if (misa >> 1) & 1 != 0 { features.push("C".to_string()); } // Compressed
                if (misa >> 2) & 1 != 0 { features.push("D".to_string()); } // Double precision FP
                if (misa >> 3) & 1 != 0 { features.push("F".to_string()); } // Single precision FP
                if (misa >> 5) & 1 != 0 { features.push("I".to_string()); } // Integer base
                if (misa >> 8) & 1 != 0 { features.push("M".to_string()); } // Multiplication
                if (misa >> 12) & 1 != 0 { features.push("U".to_string()); } // User mode
                if (misa >> 21) & 1 != 0 { features.push("V".to_string()); } // Vector
                if (misa >> 23) & 1 != 0 { features.push("X".to_string()); } // Non-standard
            }
        }
        
        features
    }

    /// Get current privilege level
    pub fn privilege_level() -> u8 {
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let mstatus: u64;
            asm!("csrr {}, mstatus", out(reg) mstatus);
            ((mstatus >> 11) & 0x3) as u8 // Extract MPP bits
        }
        #[cfg(not(target_arch = "riscv64"))]
        {
            0
        }
    }

    /// Check if running in M-mode (machine mode)
    pub fn is_machine_mode() -> bool {
        Self::privilege_level() == 3
    }

    /// Check if running in S-mode (supervisor mode)
    pub fn is_supervisor_mode() -> bool {
        Self::privilege_level() == 1
    }

    /// Check if running in U-mode (user mode)
    pub fn is_user_mode() -> bool {
        Self::privilety_level() == 0
    }

    /// Get hart (CPU core) ID
    pub fn hart_id() -> usize {
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let mhartid: usize;
            asm!("csrr {}, mhartid", out(reg) mhartid);
            mhartid
        }
        #[cfg(not(target_arch = "riscv64"))]
        {
            0
        }
    }

    /// Check for specific RISC-V feature
    pub fn has_feature(feature: &str) -> bool {
        match feature {
            "a" => Self::has_a(),  // Atomic
            "c" => Self::has_c(),  // Compressed
            "d" => Self::has_d(),  // Double precision FP
            "f" => Self::has_f(),  // Single precision FP
            "m" => Self::has_m(),  // Multiplication
            "v" => Self::has_v(),  // Vector
            _ => false,
        }
    }

    /// Check for Atomic extension
    pub fn has_a() -> bool {
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let misa: u64;
            asm!("csrr {}, misa", out(reg) misa);
            (misa >> 0) & 1 != 0
        }
        #[cfg(not(target_arch = "riscv64"))]
        {
            false
        }
    }

    /// Check for Compressed extension
    pub fn has_c() -> bool {
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let misa: u64;
            asm!("csrr {}, misa", out(reg) misa);
            (misa >> 1) & 1 != 0
        }
        #[cfg(not(target_arch = "riscv64"))]
        {
            false
        }
    }

    /// Check for Multiplication extension
    pub fn has_m() -> bool {
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let misa: u64;
            asm!("csrr {}, misa", out(reg) misa);
            (misa >> 8) & 1 != 0
        }
        #[cfg(not(target_arch = "riscv64"))]
        {
            false
        }
    }

    /// Check for Single precision FP extension
    pub fn has_f() -> bool {
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let misa: u64;
            asm!("csrr {}, misa", out(reg) misa);
            (misa >> 3) & 1 != 0
        }
        #[cfg(not(target_arch = "riscv64"))]
        {
            false
        }
    }

    /// Check for Double precision FP extension
    pub fn has_d() -> bool {
        Self::has_f() && {
            #[cfg(target_arch = "riscv64")]
            unsafe {
                let misa: u64;
                asm!("csrr {}, misa", out(reg) misa);
                (misa >> 2) & 1 != 0
            }
            #[cfg(not(target_arch = "riscv64"))]
            {
                false
            }
        }
    }

    /// Check for Vector extension
    pub fn has_v() -> bool {
        #[cfg(target_arch = "riscv64")]
        unsafe {
            let misa: u64;
            asm!("csrr {}, misa", out(reg) misa);
            (misa >> 21) & 1 != 0
        }
        #[cfg(not(target_arch = "riscv64"))]
        {
            false
        }
    }
}