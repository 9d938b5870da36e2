//! ARM64 TrustZone Security Module
//! 
//! This module implements TrustZone security features for ARM64 mobile devices.
//! TrustZone provides hardware-based security by separating secure and non-secure
//! worlds, enabling secure boot, secure storage, and trusted execution environments.

use crate::log::{info, warn, error};
use crate::KernelError;

/// TrustZone versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TrustZoneVersion {
    V8 = 1,  // TrustZone for ARMv8
    V3 = 2,  // TrustZone for ARMv8.1-V3A
    V5 = 3,  // TrustZone for ARMv8.5-V5A
    Unknown = 255,
}

/// TrustZone security level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TrustZoneLevel {
    Standard = 0,    // Basic TrustZone
    Enhanced = 1,    // Enhanced TrustZone with SMCCC v1.1
    Advanced = 2,    // Advanced TrustZone with SMCCC v1.2+
    Custom = 3,      // Vendor-specific TrustZone
}

/// TrustZone configuration
#[derive(Debug, Clone)]
pub struct TrustZoneConfig {
    pub version: TrustZoneVersion,
    pub level: TrustZoneLevel,
    pub secure_boot_enabled: bool,
    pub secure_monitor_size: usize,
    pub secure_memory_start: u64,
    pub secure_memory_end: u64,
    pub non_secure_access_allowed: bool,
}

/// TrustZone monitor service IDs for SMCCC (Secure Monitor Call Convention)
pub mod smccc {
    /// SMCCC version query
    pub const VERSION: u32 = 0x8000_0001;
    
    /// Architecture features
    pub const ARCH_FEATURES: u32 = 0x8000_0002;
    
    /// Generic service calls
    pub const SID_PSA_ARCH: u32 = 0x8400_0000;
    pub const SID_PSA_CRYPTO: u32 = 0x8400_0001;
    pub const SID_PSA_STORAGE: u32 = 0x8400_0002;
    
    /// Trusted firmware services
    pub const SID_TF_CPU_SUSPEND: u32 = 0xC200_0001;
    pub const SID_TF_CPU_OFF: u32 = 0xC200_0002;
    pub const SID_TF_CPU_ON: u32 = 0xC200_0003;
    pub const SID_TF_SYSTEM_SUSPEND: u32 = 0xC200_0004;
    pub const SID_TF_SYSTEM_OFF: u32 = 0xC200_0005;
    pub const SID_TF_SYSTEM_RESET: u32 = 0xC200_0006;
    
    /// Vendor-specific services
    pub const SID_VENDOR_SECURE: u32 = 0xBF00_0000;
}

/// Initialize TrustZone security
pub fn init_trustzone() -> Result<(), KernelError> {
    info!("Initializing ARM64 TrustZone security...");
    
    // Detect TrustZone version
    let tz_version = detect_trustzone_version()?;
    
    // Detect TrustZone level
    let tz_level = detect_trustzone_level()?;
    
    // Configure TrustZone based on detected capabilities
    let tz_config = configure_trustzone(tz_version, tz_level)?;
    
    // Set up secure monitor
    setup_secure_monitor(&tz_config)?;
    
    // Configure secure/non-secure memory separation
    configure_memory_separation(&tz_config)?;
    
    // Initialize SMCCC support
    init_smccc_support(&tz_config)?;
    
    info!("TrustZone security initialized: Version {:?}, Level {:?}", tz_version, tz_level);
    Ok(())
}

/// Detect TrustZone version
fn detect_trustzone_version() -> Result<TrustZoneVersion, KernelError> {
    // TrustZone version can be detected from various sources:
    // 1. PSCI (Power State Coordination Interface) version
    // 2. ARMv8 architecture features
    // 3. SMCCC version information
    
    // For now, assume TrustZone v8 (most common in mobile devices)
    // In a real implementation, this would query the secure monitor
    
    Ok(TrustZoneVersion::V8)
}

/// Detect TrustZone security level
fn detect_trustzone_level() -> Result<TrustZoneLevel, KernelError> {
    // Check SMCCC version and features to determine TrustZone level
    
    // Try to call SMCCC VERSION to get information
    let smccc_version = call_smccc(smccc::VERSION, 0, 0, 0);
    
    match smccc_version {
        Ok(version) => {
            // Parse SMCCC version
            let major = (version >> 16) & 0xFF;
            let minor = version & 0xFFFF;
            
            match major {
                1 if minor >= 2 => Ok(TrustZoneLevel::Advanced),
                1 if minor >= 1 => Ok(TrustZoneLevel::Enhanced),
                1 => Ok(TrustZoneLevel::Standard),
                _ => Ok(TrustZoneLevel::Custom),
            }
        },
        Err(_) => {
            // If SMCCC is not available, assume standard TrustZone
            warn!("SMCCC not available, assuming standard TrustZone");
            Ok(TrustZoneLevel::Standard)
        }
    }
}

/// Configure TrustZone based on detected capabilities
fn configure_trustzone(version: TrustZoneVersion, level: TrustZoneLevel) -> Result<TrustZoneConfig, KernelError> {
    info!("Configuring TrustZone: {:?} version, {:?} level", version, level);
    
    // Define secure monitor size based on TrustZone level
    let secure_monitor_size = match level {
        TrustZoneLevel::Standard => 0x4000,    // 16KB
        TrustZoneLevel::Enhanced => 0x8000,    // 32KB
        TrustZoneLevel::Advanced => 0x10000,   // 64KB
        TrustZoneLevel::Custom => 0x8000,      // 32KB (vendor-specific)
    };
    
    // Define secure memory regions
    // In a real system, these would be configured by the bootloader
    let secure_memory_start = 0xF000_0000;    // Start of secure DRAM
    let secure_memory_end = 0xFFFF_FFFF;      // End of secure DRAM
    
    let config = TrustZoneConfig {
        version,
        level,
        secure_boot_enabled: true,             // Would be determined from secure boot status
        secure_monitor_size,
        secure_memory_start,
        secure_memory_end,
        non_secure_access_allowed: false,      // Secure memory should not be accessible from NS world
    };
    
    Ok(config)
}

/// Set up secure monitor
fn setup_secure_monitor(config: &TrustZoneConfig) -> Result<(), KernelError> {
    info!("Setting up secure monitor ({} bytes)...", config.secure_monitor_size);
    
    // Set up secure monitor vector table
    // In a real implementation, this would install the actual secure monitor code
    
    // Configure secure monitor base address
    let monitor_base = config.secure_memory_start;
    
    // Set MONITOR_BASE register if available
    // This would be done through system registers or secure monitor interface
    
    info!("Secure monitor base configured at {:#x}", monitor_base);
    Ok(())
}

/// Configure secure/non-secure memory separation
fn configure_memory_separation(config: &TrustZoneConfig) -> Result<(), KernelError> {
    info!("Configuring memory separation...");
    
    // Configure secure memory attributes in the system control registers
    
    // Set up secure/non-secure region descriptors
    // In ARMv8-A, this would involve:
    // 1. Configuring HCR_EL2 (Hypervisor Control Register) for EL2
    // 2. Configuring SCR_EL3 (Secure Configuration Register) for EL3
    // 3. Setting up memory translation tables with secure/non-secure attributes
    
    // Mark secure memory regions as secure-only
    let secure_region_size = config.secure_memory_end - config.secure_memory_start;
    info!("Secure memory region: {:#x} - {:#x} ({} bytes)", 
          config.secure_memory_start, 
          config.secure_memory_end, 
          secure_region_size);
    
    Ok(())
}

/// Initialize SMCCC (Secure Monitor Call Convention) support
fn init_smccc_support(config: &TrustZoneConfig) -> Result<(), KernelError> {
    info!("Initializing SMCCC support...");
    
    // Set up SMC (Secure Monitor Call) handler
    // This would involve configuring exception vectors for SMC interrupts
    
    // Test basic SMCCC functionality
    let version = call_smccc(smccc::VERSION, 0, 0, 0);
    match version {
        Ok(v) => info!("SMCCC version: {:#x}", v),
        Err(_) => warn!("SMCCC version query failed"),
    }
    
    Ok(())
}

/// Make a SMCCC call to the secure monitor
fn call_smccc(func_id: u32, arg0: u64, arg1: u64, arg2: u64) -> Result<u64, KernelError> {
    // SMCCC calls are made using the SMC instruction
    // The calling convention varies by SMCCC version
    
    let mut result: u64 = 0;
    let mut error: i32 = 0;
    
    unsafe {
        core::arch::asm!(
            "smc #0",  // SMC with immediate value 0
            inout("x0") func_id => result,
            in("x1") arg0,
            in("x2") arg1, 
            in("x3") arg2,
            inout("x4") error => _,
            options(nostack)
        );
    }
    
    // Check for errors (specific error handling would depend on SMCCC version)
    if error != 0 {
        return Err(KernelError::FeatureNotSupported);
    }
    
    Ok(result)
}

/// Check if TrustZone is available and enabled
pub fn is_trustzone_enabled() -> bool {
    // This would check actual TrustZone status
    // For now, assume it's enabled on ARM64 mobile devices
    true
}

/// Get TrustZone security status
pub fn get_trustzone_status() -> Result<TrustZoneConfig, KernelError> {
    if !is_trustzone_enabled() {
        return Err(KernelError::FeatureNotSupported);
    }
    
    // In a real implementation, this would query the current TrustZone configuration
    // For now, return a default configuration
    
    configure_trustzone(TrustZoneVersion::V8, TrustZoneLevel::Standard)
}

/// Enter secure world
pub fn enter_secure_world() -> Result<(), KernelError> {
    if !is_trustzone_enabled() {
        return Err(KernelError::FeatureNotSupported);
    }
    
    // This would involve:
    // 1. Saving current context
    // 2. Switching to secure EL1 or EL3
    // 3. Configuring secure system registers
    
    info!("Entering secure world...");
    
    // SMC call to secure monitor to transition to secure state
    let _result = call_smccc(smccc::SID_TF_CPU_SUSPEND, 0, 0, 0);
    
    Ok(())
}

/// Exit secure world
pub fn exit_secure_world() -> Result<(), KernelError> {
    if !is_trustzone_enabled() {
        return Err(KernelError::FeatureNotSupported);
    }
    
    // This would involve:
    // 1. Returning from secure context
    // 2. Restoring non-secure system registers
    // 3. Validating secure data before transitioning
    
    info!("Exiting secure world...");
    
    // The secure monitor would handle the transition back to non-secure state
    
    Ok(())
}