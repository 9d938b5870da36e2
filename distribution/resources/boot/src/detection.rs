//! Hardware Detection and Initialization Framework
//! 
//! This module provides comprehensive hardware detection and initialization
//! capabilities across different architectures and firmware types.

use crate::{BootError, Architecture, BootMode, HardwareInfo, MemoryMap, MemoryRegion, MemoryType};
use log::{debug, info, warn, error};

/// Hardware detector for multiple architectures
pub struct HardwareDetector {
    arch: Architecture,
    mode: BootMode,
    info: HardwareInfo,
}

impl HardwareDetector {
    /// Create new hardware detector
    pub const fn new(arch: Architecture, mode: BootMode) -> Self {
        Self {
            arch,
            mode,
            info: HardwareInfo::default(),
        }
    }

    /// Perform comprehensive hardware detection
    pub fn detect(&mut self) -> Result<HardwareInfo, BootError> {
        info!("Starting hardware detection for {:?}", self.arch);
        
        // Detect CPU information
        self.detect_cpu()?;
        
        // Detect memory
        self.detect_memory()?;
        
        // Detect firmware capabilities
        self.detect_firmware_caps()?;
        
        // Detect platform features
        self.detect_platform_features()?;
        
        info!("Hardware detection completed successfully");
        Ok(self.info.clone())
    }

    /// Detect CPU architecture and capabilities
    fn detect_cpu(&mut self) -> Result<(), BootError> {
        match self.arch {
            Architecture::X86_64 => self.detect_x86_64_cpu(),
            Architecture::ARM64 => self.detect_arm64_cpu(),
            Architecture::RISC_V64 => self.detect_riscv64_cpu(),
        }
    }

    /// Detect x86_64 CPU information
    fn detect_x86_64_cpu(&mut self) -> Result<(), BootError> {
        debug!("Detecting x86_64 CPU...");
        
        // CPUID-based detection
        let max_cpuid = self.get_cpuid_max();
        
        // Detect vendor
        let vendor = self.get_cpuid_vendor();
        
        // Detect features
        let features = self.get_cpuid_features();
        
        debug!("CPU vendor: {:?}", vendor);
        debug!("CPU features: {:?}", features);
        debug!("Max CPUID: {:#x}", max_cpuid);
        
        // Count CPUs if possible
        self.info.cpu_count = self.detect_cpu_count();
        
        Ok(())
    }

    /// Detect ARM64 CPU information
    fn detect_arm64_cpu(&mut self) -> Result<(), BootError> {
        debug!("Detecting ARM64 CPU...");
        
        // ARM64 uses different mechanisms for CPU detection
        // Read MIDR register, system registers, etc.
        
        self.info.cpu_count = 1; // Default for ARM
        
        Ok(())
    }

    /// Detect RISC-V CPU information
    fn detect_riscv64_cpu(&mut self) -> Result<(), BootError> {
        debug!("Detecting RISC-V64 CPU...");
        
        // RISC-V detection through MISA, MIDELEG, etc.
        
        self.info.cpu_count = 1; // Default for RISC-V
        
        Ok(())
    }

    /// Get maximum CPUID leaf
    fn get_cpuid_max(&self) -> u32 {
        #[cfg(target_arch = "x86_64")]
        {
            // Use inline assembly for CPUID
            let result: u32;
            unsafe {
                asm!(
                    "cpuid",
                    "=a" {result},
                    in("eax") 0,
                    out("ecx") _,
                    out("edx") _,
                );
            }
            result
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            0
        }
    }

    /// Get CPU vendor string
    fn get_cpuid_vendor(&self) -> String {
        #[cfg(target_arch = "x86_64")]
        {
            let mut vendor = [0u8; 12];
            unsafe {
                asm!(
                    "cpuid",
                    "=b" {vendor.as_mut_ptr().add(0)},
                    "=c" {vendor.as_mut_ptr().add(8)},
                    "=d" {vendor.as_mut_ptr().add(4)},
                    in("eax") 0,
                    in("edx") _,
                    in("ecx") _,
                );
            }
            String::from_utf8_lossy(&vendor).to_string()
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            String::from("Unknown")
        }
    }

    /// Get CPU features
    fn get_cpuid_features(&self) -> Vec<String> {
        #[cfg(target_arch = "x86_64")]
        {
            let mut features = Vec::new();
            
            // EDX register from CPUID function 1
            let result: (u32, u32, u32, u32);
            unsafe {
                asm!(
                    "cpuid",
                    "=a" result.0,
                    "=b" result.1,
                    "=c" result.2,
                    "=d" result.3,
                    in("eax") 1,
                );
            }
            
            let edx = result.3;
            
            // Check for common features
            if edx & (1 << 0) != 0 { features.push("FPU".to_string()); }
            if edx & (1 << 4) != 0 { features.push("TSC".to_string()); }
            if edx & (1 << 5) != 0 { features.push("MSR".to_string()); }
            if edx & (1 << 8) != 0 { features.push("CMPXCHG8B".to_string()); }
            if edx & (1 << 23) != 0 { features.push("MMX".to_string()); }
            if edx & (1 << 24) != 0 { features.push("FXSR".to_string()); }
            if edx & (1 << 25) != 0 { features.push("SSE".to_string()); }
            if edx & (1 << 26) != 0 { features.push("SSE2".to_string()); }
            
            features
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            Vec::new()
        }
    }

    /// Detect number of CPUs
    fn detect_cpu_count(&self) -> u32 {
        #[cfg(target_arch = "x86_64")]
        {
            // Try to read APIC IDs or use CPUID
            1 // Default to 1, can be enhanced later
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            1
        }
    }

    /// Detect memory information
    fn detect_memory(&mut self) -> Result<(), BootError> {
        debug!("Detecting memory...");
        
        match self.arch {
            Architecture::X86_64 => self.detect_x86_64_memory(),
            Architecture::ARM64 => self.detect_arm64_memory(),
            Architecture::RISC_V64 => self.detect_riscv64_memory(),
        }
    }

    /// Detect x86_64 memory
    fn detect_x86_64_memory(&mut self) -> Result<(), BootError> {
        // Use BIOS e820 or UEFI memory map
        // This is architecture-specific implementation
        
        self.info.total_memory = 0; // Will be set by memory detection
        Ok(())
    }

    /// Detect ARM64 memory
    fn detect_arm64_memory(&mut self) -> Result<(), BootError> {
        // ARM64 memory detection through device tree or ACPI
        Ok(())
    }

    /// Detect RISC-V memory
    fn detect_riscv64_memory(&mut self) -> Result<(), BootError> {
        // RISC-V memory detection
        Ok(())
    }

    /// Detect firmware capabilities
    fn detect_firmware_caps(&mut self) -> Result<(), BootError> {
        debug!("Detecting firmware capabilities...");
        
        match self.mode {
            BootMode::UEFI => self.detect_uefi_caps(),
            BootMode::LegacyBIOS => self.detect_bios_caps(),
            BootMode::Direct => self.detect_direct_caps(),
        }
    }

    /// Detect UEFI capabilities
    fn detect_uefi_caps(&mut self) -> Result<(), BootError> {
        info!("Detecting UEFI capabilities...");
        
        self.info.has_uefi = true;
        self.info.has_acpi = true; // UEFI typically has ACPI
        
        Ok(())
    }

    /// Detect BIOS capabilities
    fn detect_bios_caps(&mut self) -> Result<(), BootError> {
        info!("Detecting BIOS capabilities...");
        
        // Check for ACPI presence
        self.info.has_acpi = self.check_bios_acpi();
        self.info.has_uefi = false;
        
        Ok(())
    }

    /// Check for BIOS ACPI presence
    fn check_bios_acpi(&self) -> bool {
        // Check for ACPI tables in BIOS memory
        false // Implement ACPI table detection
    }

    /// Detect direct boot capabilities
    fn detect_direct_caps(&mut self) -> Result<(), BootError> {
        info!("Detecting direct boot capabilities...");
        
        // Direct boot means no firmware abstraction
        self.info.has_uefi = false;
        self.info.has_acpi = false;
        
        Ok(())
    }

    /// Detect platform features
    fn detect_platform_features(&mut self) -> Result<(), BootError> {
        debug!("Detecting platform features...");
        
        match self.arch {
            Architecture::X86_64 => self.detect_x86_64_features(),
            Architecture::ARM64 => self.detect_arm64_features(),
            Architecture::RISC_V64 => self.detect_riscv64_features(),
        }
    }

    /// Detect x86_64 platform features
    fn detect_x86_64_features(&mut self) -> Result<(), BootError> {
        // Detect chipset, I/O capabilities, etc.
        Ok(())
    }

    /// Detect ARM64 platform features
    fn detect_arm64_features(&mut self) -> Result<(), BootError> {
        // ARM64 platform detection
        Ok(())
    }

    /// Detect RISC-V platform features
    fn detect_riscv64_features(&mut self) -> Result<(), BootError> {
        // RISC-V platform detection
        Ok(())
    }

    /// Get the hardware information
    pub const fn hardware_info(&self) -> &HardwareInfo {
        &self.info
    }
}

/// Platform-specific hardware initialization
pub struct HardwareInitializer {
    arch: Architecture,
    mode: BootMode,
}

impl HardwareInitializer {
    /// Create new hardware initializer
    pub const fn new(arch: Architecture, mode: BootMode) -> Self {
        Self { arch, mode }
    }

    /// Initialize hardware subsystems
    pub fn initialize(&mut self, info: &HardwareInfo) -> Result<(), BootError> {
        info!("Initializing hardware subsystems...");
        
        // Initialize interrupts
        self.initialize_interrupts()?;
        
        // Initialize timer
        self.initialize_timer()?;
        
        // Initialize serial console
        self.initialize_console()?;
        
        // Initialize platform-specific hardware
        match self.arch {
            Architecture::X86_64 => self.init_x86_64_platform(info),
            Architecture::ARM64 => self.init_arm64_platform(info),
            Architecture::RISC_V64 => self.init_riscv64_platform(info),
        }
    }

    /// Initialize interrupt system
    fn initialize_interrupts(&mut self) -> Result<(), BootError> {
        debug!("Initializing interrupt system...");
        
        match self.arch {
            Architecture::X86_64 => self.init_x86_64_interrupts(),
            Architecture::ARM64 => self.init_arm64_interrupts(),
            Architecture::RISC_V64 => self.init_riscv64_interrupts(),
        }
    }

    /// Initialize x86_64 interrupt system
    fn init_x86_64_interrupts(&mut self) -> Result<(), BootError> {
        // Set up IDT, PIC, etc.
        Ok(())
    }

    /// Initialize ARM64 interrupt system
    fn init_arm64_interrupts(&mut self) -> Result<(), BootError> {
        // Set up GIC, etc.
        Ok(())
    }

    /// Initialize RISC-V interrupt system
    fn init_riscv64_interrupts(&mut self) -> Result<(), BootError> {
        // Set up CLINT/PLIC, etc.
        Ok(())
    }

    /// Initialize timer system
    fn initialize_timer(&mut self) -> Result<(), BootError> {
        debug!("Initializing timer system...");
        
        match self.arch {
            Architecture::X86_64 => self.init_x86_64_timer(),
            Architecture::ARM64 => self.init_arm64_timer(),
            Architecture::RISC_V64 => self.init_riscv64_timer(),
        }
    }

    /// Initialize x86_64 timer
    fn init_x86_64_timer(&mut self) -> Result<(), BootError> {
        // Initialize PIT/APIC timer
        Ok(())
    }

    /// Initialize ARM64 timer
    fn init_arm64_timer(&mut self) -> Result<(), BootError> {
        // Initialize ARM generic timer
        Ok(())
    }

    /// Initialize RISC-V timer
    fn init_riscv64_timer(&mut self) -> Result<(), BootError> {
        // Initialize RISC-V timer
        Ok(())
    }

    /// Initialize console
    fn initialize_console(&mut self) -> Result<(), BootError> {
        debug!("Initializing console...");
        
        match self.arch {
            Architecture::X86_64 => self.init_x86_64_console(),
            Architecture::ARM64 => self.init_arm64_console(),
            Architecture::RISC_V64 => self.init_riscv64_console(),
        }
    }

    /// Initialize x86_64 console
    fn init_x86_64_console(&mut self) -> Result<(), BootError> {
        // Initialize serial port
        Ok(())
    }

    /// Initialize ARM64 console
    fn init_arm64_console(&mut self) -> Result<(), BootError> {
        // Initialize UART
        Ok(())
    }

    /// Initialize RISC-V console
    fn init_riscv64_console(&mut self) -> Result<(), BootError> {
        // Initialize UART
        Ok(())
    }

    /// Initialize platform-specific hardware
    fn init_x86_64_platform(&mut self, _info: &HardwareInfo) -> Result<(), BootError> {
        // PCI, chipset initialization
        Ok(())
    }

    fn init_arm64_platform(&mut self, _info: &HardwareInfo) -> Result<(), BootError> {
        // ARM-specific platform initialization
        Ok(())
    }

    fn init_riscv64_platform(&mut self, _info: &HardwareInfo) -> Result<(), BootError> {
        // RISC-V specific platform initialization
        Ok(())
    }
}