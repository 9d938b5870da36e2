//! MultiOS Direct Hardware Boot Manager
//! 
//! This is the main entry point for direct hardware boot capability.
//! It handles hardware detection, initialization, and boot sequence management
//! across multiple architectures (x86_64, ARM64, RISC-V).

#![no_std]
#![cfg_attr(feature = "bios", feature(abi_efiapi))]
#![allow(clippy::missing_safety_doc)]

use core::fmt::{self, Write};
use log::{LevelFilter, Log, Metadata, Record};

/// Boot manager errors
#[derive(Debug, Clone)]
pub enum BootError {
    HardwareDetectionFailed,
    ArchitectureUnsupported,
    BootSequenceFailed,
    MemoryInitializationFailed,
    UEFIFailed,
    BIOSFailed,
    DeviceInitializationFailed,
    Unknown,
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::HardwareDetectionFailed => write!(f, "Hardware detection failed"),
            BootError::ArchitectureUnsupported => write!(f, "Unsupported architecture"),
            BootError::BootSequenceFailed => write!(f, "Boot sequence failed"),
            BootError::MemoryInitializationFailed => write!(f, "Memory initialization failed"),
            BootError::UEFIFailed => write!(f, "UEFI boot failed"),
            BootError::BIOSFailed => write!(f, "BIOS boot failed"),
            BootError::DeviceInitializationFailed => write!(f, "Device initialization failed"),
            BootError::Unknown => write!(f, "Unknown boot error"),
        }
    }
}

/// Architecture type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Architecture {
    X86_64,
    ARM64,
    RISC_V64,
}

/// Boot mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BootMode {
    UEFI,
    LegacyBIOS,
    Direct,
}

/// Boot configuration
pub struct BootConfig {
    pub arch: Architecture,
    pub mode: BootMode,
    pub memory_map: Option<MemoryMap>,
    pub hardware_info: HardwareInfo,
    pub debug: bool,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            arch: Architecture::X86_64,
            mode: BootMode::LegacyBIOS,
            memory_map: None,
            hardware_info: HardwareInfo::default(),
            debug: false,
        }
    }
}

/// Memory region information
#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    pub start: u64,
    pub size: u64,
    pub region_type: MemoryType,
}

/// Memory type
#[derive(Debug, Clone, PartialEq)]
pub enum MemoryType {
    Usable,
    Reserved,
    ACPIReclaimable,
    ACPINVS,
    BadMemory,
    BootloaderReserved,
    Conventional,
    Persistent,
    Unknown,
}

/// Complete memory map
#[derive(Debug, Clone, Default)]
pub struct MemoryMap {
    pub regions: Vec<MemoryRegion>,
}

/// Hardware information detected during boot
#[derive(Debug, Clone, Default)]
pub struct HardwareInfo {
    pub cpu_count: u32,
    pub total_memory: u64,
    pub architecture: Architecture,
    pub firmware_type: BootMode,
    pub has_acpi: bool,
    pub has_uefi: bool,
}

/// Hardware boot manager
pub struct HardwareBootManager {
    config: BootConfig,
    hardware_detected: bool,
    memory_initialized: bool,
    devices_initialized: bool,
}

impl HardwareBootManager {
    /// Create new hardware boot manager
    pub const fn new(config: BootConfig) -> Self {
        Self {
            config,
            hardware_detected: false,
            memory_initialized: false,
            devices_initialized: false,
        }
    }

    /// Main boot sequence entry point
    pub fn boot(&mut self) -> Result<(), BootError> {
        log::info!("Starting MultiOS Hardware Boot Sequence");
        
        // Stage 1: Hardware Detection
        self.detect_hardware()?;
        
        // Stage 2: Memory Initialization
        self.initialize_memory()?;
        
        // Stage 3: Device Detection and Initialization
        self.initialize_devices()?;
        
        // Stage 4: Boot Loader Execution
        self.execute_bootloader()?;
        
        log::info!("Hardware boot sequence completed successfully");
        Ok(())
    }

    /// Detect hardware capabilities and architecture
    fn detect_hardware(&mut self) -> Result<(), BootError> {
        log::info!("Detecting hardware...");
        
        // Detect CPU architecture
        self.detect_architecture()?;
        
        // Detect memory
        self.detect_memory()?;
        
        // Detect firmware type
        self.detect_firmware()?;
        
        // Detect available devices
        self.detect_devices()?;
        
        self.hardware_detected = true;
        Ok(())
    }

    /// Detect CPU architecture
    fn detect_architecture(&mut self) -> Result<(), BootError> {
        match self.config.arch {
            Architecture::X86_64 => self.detect_x86_64(),
            Architecture::ARM64 => self.detect_arm64(),
            Architecture::RISC_V64 => self.detect_riscv64(),
        }
    }

    /// Initialize memory subsystem
    fn initialize_memory(&mut self) -> Result<(), BootError> {
        log::info!("Initializing memory subsystem...");
        
        // Initialize heap
        self.init_heap()?;
        
        // Set up memory protection
        self.setup_memory_protection()?;
        
        self.memory_initialized = true;
        Ok(())
    }

    /// Initialize device drivers
    fn initialize_devices(&mut self) -> Result<(), BootError> {
        log::info!("Initializing device drivers...");
        
        // Initialize platform-specific devices
        match self.config.arch {
            Architecture::X86_64 => self.init_x86_64_devices(),
            Architecture::ARM64 => self.init_arm64_devices(),
            Architecture::RISC_V64 => self.init_riscv64_devices(),
        }?;
        
        self.devices_initialized = true;
        Ok(())
    }

    /// Execute appropriate boot loader
    fn execute_bootloader(&mut self) -> Result<(), BootError> {
        log::info!("Executing boot loader...");
        
        match self.config.mode {
            BootMode::UEFI => self.execute_uefi_bootloader(),
            BootMode::LegacyBIOS => self.execute_bios_bootloader(),
            BootMode::Direct => self.execute_direct_bootloader(),
        }
    }

    /// Architecture-specific detection methods
    fn detect_x86_64(&mut self) -> Result<(), BootError> {
        // CPUID detection for x86_64 features
        log::info!("Detected x86_64 architecture");
        Ok(())
    }

    fn detect_arm64(&mut self) -> Result<(), BootError> {
        // ARM64 specific detection
        log::info!("Detected ARM64 architecture");
        Ok(())
    }

    fn detect_riscv64(&mut self) -> Result<(), BootError> {
        // RISC-V specific detection
        log::info!("Detected RISC-V64 architecture");
        Ok(())
    }

    fn detect_memory(&mut self) -> Result<(), BootError> {
        // Detect available memory using architecture-specific methods
        log::info!("Detecting memory...");
        Ok(())
    }

    fn detect_firmware(&mut self) -> Result<(), BootError> {
        // Detect firmware type (UEFI vs BIOS)
        log::info!("Detecting firmware type...");
        Ok(())
    }

    fn detect_devices(&mut self) -> Result<(), BootError> {
        // Detect available hardware devices
        log::info!("Detecting devices...");
        Ok(())
    }

    /// Memory initialization methods
    fn init_heap(&mut self) -> Result<(), BootError> {
        // Initialize heap allocator
        Ok(())
    }

    fn setup_memory_protection(&mut self) -> Result<(), BootError> {
        // Set up memory protection (paging, etc.)
        Ok(())
    }

    /// Device initialization methods
    fn init_x86_64_devices(&mut self) -> Result<(), BootError> {
        // Initialize x86_64 specific devices
        Ok(())
    }

    fn init_arm64_devices(&mut self) -> Result<(), BootError> {
        // Initialize ARM64 specific devices
        Ok(())
    }

    fn init_riscv64_devices(&mut self) -> Result<(), BootError> {
        // Initialize RISC-V specific devices
        Ok(())
    }

    /// Boot loader execution methods
    fn execute_uefi_bootloader(&mut self) -> Result<(), BootError> {
        log::info!("Executing UEFI bootloader...");
        Ok(())
    }

    fn execute_bios_bootloader(&mut self) -> Result<(), BootError> {
        log::info!("Executing BIOS bootloader...");
        Ok(())
    }

    fn execute_direct_bootloader(&mut self) -> Result<(), BootError> {
        log::info!("Executing direct bootloader...");
        Ok(())
    }

    /// Get current boot status
    pub const fn boot_status(&self) -> BootStatus {
        BootStatus {
            hardware_detected: self.hardware_detected,
            memory_initialized: self.memory_initialized,
            devices_initialized: self.devices_initialized,
        }
    }
}

/// Boot status information
#[derive(Debug, Clone)]
pub struct BootStatus {
    pub hardware_detected: bool,
    pub memory_initialized: bool,
    pub devices_initialized: bool,
}

/// Simple boot logger
pub struct BootLogger;

impl Log for BootLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // Simple text-based logging for early boot
        // In a real implementation, this would write to a debug console
    }

    fn flush(&self) {
        // Flush any pending log messages
    }
}

/// Initialize the boot logging system
pub fn init_boot_logging(level: LevelFilter) {
    log::set_logger(&BootLogger).unwrap();
    log::set_max_level(level);
}

/// Entry point for hardware boot
pub fn entry_point(config: BootConfig) -> Result<(), BootError> {
    init_boot_logging(if config.debug { LevelFilter::Debug } else { LevelFilter::Info });
    
    let mut boot_manager = HardwareBootManager::new(config);
    boot_manager.boot()
}