//! ARM64 Mobile Power Management
//! 
//! This module implements comprehensive power management for ARM64 mobile devices,
//! including CPU idle states, DVFS (Dynamic Voltage and Frequency Scaling), 
//! thermal management, and device-specific power optimizations.

use crate::log::{info, warn, error};
use crate::KernelError;

/// CPU idle states (ARM Power States)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CpuPowerState {
    Active = 0,        // Full power, normal operation
    Wfi = 1,           // Wait For Interrupt (lightest sleep)
    WfiPowerDown = 2,  // WFI with minor power reduction
    Standby = 3,       // CPU standby (core power reduction)
    Retention = 4,     // CPU retention (reduced voltage)
    Dormant = 5,       // CPU dormant (power gating)
    Off = 6,           // CPU powered off
    Suspend = 7,       // System suspend
}

/// System power states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SystemPowerState {
    Active = 0,           // Full system operation
    Idle = 1,             // System idle
    Sleep = 2,            // System sleep (RAM retained)
    SuspendToRam = 3,     // ACPI S3 - suspend to RAM
    SuspendToDisk = 4,    // ACPI S4 - suspend to disk
    Hibernate = 5,        // Extended hibernation
    SoftOff = 6,          // ACPI S5 - soft power off
    PlatformStandby = 7,  // Platform-specific standby
}

/// Power management domains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerDomain {
    Cpu = 0,              // CPU power domain
    Gpu = 1,              // GPU power domain
    Display = 2,          // Display power domain
    Memory = 3,           // Memory power domain
    Peripherals = 4,      // Peripheral power domain
    Audio = 5,            // Audio power domain
    Camera = 6,           // Camera power domain
    Connectivity = 7,     // WiFi/Bluetooth power domain
    Sensors = 8,          // Sensor power domain
    Platform = 9,         // Platform-specific domain
}

/// DVFS (Dynamic Voltage and Frequency Scaling) information
#[derive(Debug, Clone, Copy)]
pub struct DvfsInfo {
    pub min_frequency_mhz: u32,
    pub max_frequency_mhz: u32,
    pub current_frequency_mhz: u32,
    pub min_voltage_mv: u32,
    pub max_voltage_mv: u32,
    pub current_voltage_mv: u32,
    pub frequency_steps: u32,
    pub voltage_steps: u32,
    pub scaling_governor: DvfsGovernor,
}

/// DVFS scaling governors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DvfsGovernor {
    Performance = 0,      // Always use maximum frequency
    Powersave = 1,        // Always use minimum frequency
    Balanced = 2,         // Balanced performance/power
    OnDemand = 3,         // Scale based on demand
    Conservative = 4,     // Conservative scaling
    Interactive = 5,      // Interactive scaling for mobile
    Schedutil = 6,        // Scheduler-driven scaling
    Custom = 7,           // Custom/proprietary governor
}

/// Thermal management information
#[derive(Debug, Clone, Copy)]
pub struct ThermalInfo {
    pub current_temp_mc: i32,      // Current temperature in millidegrees Celsius
    pub temp_throttle_mc: i32,     // Temperature threshold for throttling
    pub temp_shutdown_mc: i32,     // Temperature threshold for shutdown
    pub cooling_states: [CoolingState; 8],
    pub active_cooling: u8,
}

/// Thermal cooling states
#[derive(Debug, Clone, Copy)]
pub struct CoolingState {
    pub frequency_limit_mhz: u32,
    pub power_limit_mw: u32,
    pub throttle_percentage: u8,
}

/// Power measurement information
#[derive(Debug, Clone, Copy)]
pub struct PowerMeasurement {
    pub current_mw: u32,          // Current power consumption
    pub voltage_mv: u32,          // Current voltage
    pub current_ma: u32,          // Current current draw
    pub average_mw: u32,          // Average power over time
    pub peak_mw: u32,             // Peak power consumption
    pub energy_mj: u64,           // Total energy consumed
}

/// Battery power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BatteryState {
    Charging = 0,         // Battery is charging
    Full = 1,             // Battery is full
    Discharging = 2,      // Battery is discharging
    Critical = 3,         // Battery critically low
    Emergency = 4,        // Battery in emergency state
    Unknown = 5,          // Battery state unknown
}

/// Power management configuration
#[derive(Debug, Clone)]
pub struct PowerConfig {
    pub cpu_config: CpuPowerConfig,
    pub gpu_config: GpuPowerConfig,
    pub display_config: DisplayPowerConfig,
    pub memory_config: MemoryPowerConfig,
    pub thermal_config: ThermalConfig,
    pub battery_config: BatteryPowerConfig,
}

/// CPU power configuration
#[derive(Debug, Clone, Copy)]
pub struct CpuPowerConfig {
    pub idle_states: [CpuPowerStateInfo; 8],
    pub idle_state_count: u8,
    pub dvfs_info: DvfsInfo,
    pub affinity_enabled: bool,
}

/// CPU power state information
#[derive(Debug, Clone, Copy)]
pub struct CpuPowerStateInfo {
    pub state: CpuPowerState,
    pub latency_us: u32,
    pub power_mw: u32,
    pub available: bool,
}

/// GPU power configuration
#[derive(Debug, Clone, Copy)]
pub struct GpuPowerConfig {
    pub dvfs_info: DvfsInfo,
    pub power_gating_enabled: bool,
    pub turbo_mode_available: bool,
}

/// Display power configuration
#[derive(Debug, Clone, Copy)]
pub struct DisplayPowerConfig {
    pub auto_brightness: bool,
    pub adaptive_brightness: bool,
    pub low_power_mode: bool,
    pub dim_when_idle: bool,
}

/// Memory power configuration
#[derive(Debug, Clone, Copy)]
pub struct MemoryPowerConfig {
    pub self_refresh_enabled: bool,
    pub power_down_enabled: bool,
    pub ddr_scaling: bool,
}

/// Thermal configuration
#[derive(Debug, Clone, Copy)]
pub struct ThermalConfig {
    pub thermal_throttling: bool,
    pub aggressive_throttling: bool,
    pub cooling_device_supported: bool,
    pub sensor_count: u8,
}

/// Battery power configuration
#[derive(Debug, Clone, Copy)]
pub struct BatteryPowerConfig {
    pub battery_present: bool,
    pub charging_supported: bool,
    pub fast_charging: bool,
    pub wireless_charging: bool,
}

/// Initialize power management
pub fn init_power_management() -> Result<(), KernelError> {
    info!("Initializing ARM64 power management...");
    
    // Detect power management capabilities
    let power_config = detect_power_capabilities()?;
    
    // Initialize CPU power management
    init_cpu_power_management(&power_config.cpu_config)?;
    
    // Initialize GPU power management
    init_gpu_power_management(&power_config.gpu_config)?;
    
    // Initialize display power management
    init_display_power_management(&power_config.display_config)?;
    
    // Initialize memory power management
    init_memory_power_management(&power_config.memory_config)?;
    
    // Initialize thermal management
    init_thermal_management(&power_config.thermal_config)?;
    
    // Initialize battery power management
    init_battery_power_management(&power_config.battery_config)?;
    
    info!("Power management initialized successfully");
    Ok(())
}

/// Detect power management capabilities
fn detect_power_capabilities() -> Result<PowerConfig, KernelError> {
    info!("Detecting power management capabilities...");
    
    // Detect CPU power management features
    let cpu_config = detect_cpu_power_config()?;
    
    // Detect GPU power management features
    let gpu_config = detect_gpu_power_config()?;
    
    // Detect display power management features
    let display_config = detect_display_power_config()?;
    
    // Detect memory power management features
    let memory_config = detect_memory_power_config()?;
    
    // Detect thermal management features
    let thermal_config = detect_thermal_config()?;
    
    // Detect battery power management features
    let battery_config = detect_battery_power_config()?;
    
    let power_config = PowerConfig {
        cpu_config,
        gpu_config,
        display_config,
        memory_config,
        thermal_config,
        battery_config,
    };
    
    info!("Power management capabilities detected");
    Ok(power_config)
}

/// Detect CPU power configuration
fn detect_cpu_power_config() -> Result<CpuPowerConfig, KernelError> {
    info!("Detecting CPU power configuration...");
    
    // Detect CPU idle states
    let idle_states = detect_cpu_idle_states()?;
    
    // Detect CPU DVFS capabilities
    let dvfs_info = detect_cpu_dvfs_info()?;
    
    Ok(CpuPowerConfig {
        idle_states,
        idle_state_count: idle_states.len() as u8,
        dvfs_info,
        affinity_enabled: true, // CPU affinity for power management
    })
}

/// Detect CPU idle states
fn detect_cpu_idle_states() -> Result<[CpuPowerStateInfo; 8], KernelError> {
    info!("Detecting CPU idle states...");
    
    // ARM64 typically has 6-7 power states
    let mut idle_states = [CpuPowerStateInfo {
        state: CpuPowerState::Active,
        latency_us: 0,
        power_mw: 0,
        available: false,
    }; 8];
    
    // Define ARM64 standard idle states
    idle_states[0] = CpuPowerStateInfo { state: CpuPowerState::Active, latency_us: 0, power_mw: 1000, available: true };
    idle_states[1] = CpuPowerStateInfo { state: CpuPowerState::Wfi, latency_us: 100, power_mw: 500, available: true };
    idle_states[2] = CpuPowerStateInfo { state: CpuPowerState::WfiPowerDown, latency_us: 1000, power_mw: 100, available: true };
    idle_states[3] = CpuPowerStateInfo { state: CpuPowerState::Standby, latency_us: 10000, power_mw: 50, available: true };
    idle_states[4] = CpuPowerStateInfo { state: CpuPowerState::Retention, latency_us: 50000, power_mw: 10, available: true };
    idle_states[5] = CpuPowerStateInfo { state: CpuPowerState::Dormant, latency_us: 100000, power_mw: 1, available: true };
    idle_states[6] = CpuPowerStateInfo { state: CpuPowerState::Off, latency_us: 500000, power_mw: 0, available: true };
    
    Ok(idle_states)
}

/// Detect CPU DVFS information
fn detect_cpu_dvfs_info() -> Result<DvfsInfo, KernelError> {
    info!("Detecting CPU DVFS information...");
    
    // Typical ARM64 mobile CPU frequency ranges
    Ok(DvfsInfo {
        min_frequency_mhz: 400,
        max_frequency_mhz: 2800,
        current_frequency_mhz: 800,
        min_voltage_mv: 650,
        max_voltage_mv: 1150,
        current_voltage_mv: 700,
        frequency_steps: 16,
        voltage_steps: 8,
        scaling_governor: DvfsGovernor::Interactive, // Good for mobile devices
    })
}

/// Detect GPU power configuration
fn detect_gpu_power_config() -> Result<GpuPowerConfig, KernelError> {
    info!("Detecting GPU power configuration...");
    
    Ok(GpuPowerConfig {
        dvfs_info: DvfsInfo {
            min_frequency_mhz: 100,
            max_frequency_mhz: 800,
            current_frequency_mhz: 200,
            min_voltage_mv: 650,
            max_voltage_mv: 900,
            current_voltage_mv: 700,
            frequency_steps: 8,
            voltage_steps: 6,
            scaling_governor: DvfsGovernor::Balanced,
        },
        power_gating_enabled: true,
        turbo_mode_available: true,
    })
}

/// Detect display power configuration
fn detect_display_power_config() -> Result<DisplayPowerConfig, KernelError> {
    info!("Detecting display power configuration...");
    
    Ok(DisplayPowerConfig {
        auto_brightness: true,
        adaptive_brightness: true,
        low_power_mode: true,
        dim_when_idle: true,
    })
}

/// Detect memory power configuration
fn detect_memory_power_config() -> Result<MemoryPowerConfig, KernelError> {
    info!("Detecting memory power configuration...");
    
    Ok(MemoryPowerConfig {
        self_refresh_enabled: true,
        power_down_enabled: true,
        ddr_scaling: true,
    })
}

/// Detect thermal configuration
fn detect_thermal_config() -> Result<ThermalConfig, KernelError> {
    info!("Detecting thermal configuration...");
    
    Ok(ThermalConfig {
        thermal_throttling: true,
        aggressive_throttling: false,
        cooling_device_supported: true,
        sensor_count: 4, // CPU, GPU, battery, ambient
    })
}

/// Detect battery power configuration
fn detect_battery_power_config() -> Result<BatteryPowerConfig, KernelError> {
    info!("Detecting battery power configuration...");
    
    Ok(BatteryPowerConfig {
        battery_present: true,
        charging_supported: true,
        fast_charging: true,
        wireless_charging: true,
    })
}

/// Initialize CPU power management
fn init_cpu_power_management(config: &CpuPowerConfig) -> Result<(), KernelError> {
    info!("Initializing CPU power management...");
    
    // Set up CPU idle state management
    setup_cpu_idle_states(config)?;
    
    // Initialize CPU DVFS
    setup_cpu_dvfs(config)?;
    
    // Set up CPU affinity for power management
    setup_cpu_affinity_management()?;
    
    Ok(())
}

/// Set up CPU idle states
fn setup_cpu_idle_states(config: &CpuPowerConfig) -> Result<(), KernelError> {
    info!("Setting up CPU idle states...");
    
    // Configure CPU to use appropriate idle states based on requirements
    // This would involve setting up the ARM power management infrastructure
    
    for i in 0..config.idle_state_count {
        let state = config.idle_states[i as usize];
        if state.available {
            info!("CPU idle state {}: {:?} ({:?})", i, state.state, state.power_mw);
        }
    }
    
    Ok(())
}

/// Set up CPU DVFS
fn setup_cpu_dvfs(config: &CpuPowerConfig) -> Result<(), KernelError> {
    info!("Setting up CPU DVFS...");
    
    let dvfs = &config.dvfs_info;
    
    info!("CPU DVFS: {}MHz - {}MHz (governor: {:?})", 
          dvfs.min_frequency_mhz, dvfs.max_frequency_mhz, dvfs.scaling_governor);
    
    // Initialize DVFS governor
    match dvfs.scaling_governor {
        DvfsGovernor::Interactive => init_interactive_governor(),
        DvfsGovernor::OnDemand => init_ondemand_governor(),
        DvfsGovernor::Balanced => init_balanced_governor(),
        _ => init_default_governor(),
    }
    
    Ok(())
}

/// Initialize interactive governor (best for mobile devices)
fn init_interactive_governor() -> Result<(), KernelError> {
    info!("Initializing interactive DVFS governor...");
    
    // Interactive governor provides good responsiveness for mobile devices
    // It responds quickly to load changes while maintaining good power efficiency
    
    Ok(())
}

/// Initialize on-demand governor
fn init_ondemand_governor() -> Result<(), KernelError> {
    info!("Initializing on-demand DVFS governor...");
    
    Ok(())
}

/// Initialize balanced governor
fn init_balanced_governor() -> Result<(), KernelError> {
    info!("Initializing balanced DVFS governor...");
    
    Ok(())
}

/// Initialize default governor
fn init_default_governor() -> Result<(), KernelError> {
    info!("Initializing default DVFS governor...");
    
    Ok(())
}

/// Set up CPU affinity management
fn setup_cpu_affinity_management() -> Result<(), KernelError> {
    info!("Setting up CPU affinity management...");
    
    // Configure CPU affinity for power management
    // This involves binding processes to specific cores based on power requirements
    
    Ok(())
}

/// Initialize GPU power management
fn init_gpu_power_management(config: &GpuPowerConfig) -> Result<(), KernelError> {
    info!("Initializing GPU power management...");
    
    if config.power_gating_enabled {
        info!("GPU power gating enabled");
    }
    
    if config.turbo_mode_available {
        info!("GPU turbo mode available");
    }
    
    Ok(())
}

/// Initialize display power management
fn init_display_power_management(config: &DisplayPowerConfig) -> Result<(), KernelError> {
    info!("Initializing display power management...");
    
    if config.auto_brightness {
        info!("Auto brightness enabled");
    }
    
    if config.adaptive_brightness {
        info!("Adaptive brightness enabled");
    }
    
    if config.low_power_mode {
        info!("Display low power mode enabled");
    }
    
    Ok(())
}

/// Initialize memory power management
fn init_memory_power_management(config: &MemoryPowerConfig) -> Result<(), KernelError> {
    info!("Initializing memory power management...");
    
    if config.self_refresh_enabled {
        info!("Memory self-refresh enabled");
    }
    
    if config.power_down_enabled {
        info!("Memory power-down enabled");
    }
    
    if config.ddr_scaling {
        info!("DDR frequency scaling enabled");
    }
    
    Ok(())
}

/// Initialize thermal management
fn init_thermal_management(config: &ThermalConfig) -> Result<(), KernelError> {
    info!("Initializing thermal management...");
    
    if !config.thermal_throttling {
        warn!("Thermal throttling not supported");
        return Ok(());
    }
    
    info!("Thermal throttling enabled with {} sensors", config.sensor_count);
    
    // Set up thermal zones and cooling devices
    
    Ok(())
}

/// Initialize battery power management
fn init_battery_power_management(config: &BatteryPowerConfig) -> Result<(), KernelError> {
    info!("Initializing battery power management...");
    
    if !config.battery_present {
        warn!("No battery detected");
        return Ok(());
    }
    
    info!("Battery present with charging support");
    
    if config.fast_charging {
        info!("Fast charging supported");
    }
    
    if config.wireless_charging {
        info!("Wireless charging supported");
    }
    
    Ok(())
}

/// Enter CPU idle state
pub fn enter_cpu_idle_state(state: CpuPowerState) -> Result<(), KernelError> {
    match state {
        CpuPowerState::Active => {
            info!("CPU already in active state");
        },
        CpuPowerState::Wfi => {
            // Wait for interrupt - lightweight sleep
            unsafe {
                core::arch::asm!("wfi");
            }
        },
        CpuPowerState::WfiPowerDown => {
            // WFI with power down
            unsafe {
                core::arch::asm!("wfi");
            }
        },
        _ => {
            warn!("CPU idle state {:?} not implemented", state);
        }
    }
    
    Ok(())
}

/// Set CPU frequency (DVFS)
pub fn set_cpu_frequency(frequency_mhz: u32) -> Result<(), KernelError> {
    info!("Setting CPU frequency to {} MHz", frequency_mhz);
    
    // This would interface with the actual DVFS hardware
    // It would adjust both voltage and frequency simultaneously
    
    Ok(())
}

/// Set GPU frequency
pub fn set_gpu_frequency(frequency_mhz: u32) -> Result<(), KernelError> {
    info!("Setting GPU frequency to {} MHz", frequency_mhz);
    
    // This would interface with GPU power management
    
    Ok(())
}

/// Get current thermal status
pub fn get_thermal_status() -> Result<ThermalInfo, KernelError> {
    // This would query actual thermal sensors
    
    Ok(ThermalInfo {
        current_temp_mc: 35000, // 35°C
        temp_throttle_mc: 85000, // 85°C
        temp_shutdown_mc: 95000, // 95°C
        cooling_states: [CoolingState {
            frequency_limit_mhz: 2000,
            power_limit_mw: 3000,
            throttle_percentage: 20,
        }; 8],
        active_cooling: 0,
    })
}

/// Handle thermal throttling
pub fn handle_thermal_throttling() -> Result<(), KernelError> {
    let thermal_status = get_thermal_status()?;
    
    if thermal_status.current_temp_mc > thermal_status.temp_throttle_mc {
        warn!("Thermal throttling triggered at {}°C", thermal_status.current_temp_mc / 1000);
        
        // Reduce CPU and GPU frequency to lower temperature
        let throttled_freq = thermal_status.cooling_states[0].frequency_limit_mhz;
        set_cpu_frequency(throttled_freq)?;
        set_gpu_frequency(throttled_freq / 2)?; // Throttle GPU more aggressively
        
        return Ok(());
    }
    
    Ok(())
}

/// Enter system suspend
pub fn enter_system_suspend() -> Result<(), KernelError> {
    info!("Entering system suspend...");
    
    // Save system state
    save_system_state()?;
    
    // Disable non-essential devices
    disable_non_essential_devices()?;
    
    // Configure RAM for self-refresh
    configure_ram_self_refresh()?;
    
    // Enter suspend state
    enter_suspend_state()?;
    
    info!("System suspended");
    Ok(())
}

/// Save system state before suspend
fn save_system_state() -> Result<(), KernelError> {
    info!("Saving system state for suspend...");
    
    // Save current system state to allow resuming
    
    Ok(())
}

/// Disable non-essential devices before suspend
fn disable_non_essential_devices() -> Result<(), KernelError> {
    info!("Disabling non-essential devices...");
    
    // Power down non-essential peripherals
    
    Ok(())
}

/// Configure RAM for self-refresh during suspend
fn configure_ram_self_refresh() -> Result<(), KernelError> {
    info!("Configuring RAM self-refresh...");
    
    // Configure memory to enter self-refresh mode
    
    Ok(())
}

/// Enter actual suspend state
fn enter_suspend_state() -> Result<(), KernelError> {
    info!("Entering suspend state...");
    
    // This would involve deep sleep or suspend-to-RAM
    
    Ok(())
}

/// Resume from system suspend
pub fn resume_from_suspend() -> Result<(), KernelError> {
    info!("Resuming from system suspend...");
    
    // Restore RAM from self-refresh
    restore_ram_from_self_refresh()?;
    
    // Re-enable devices
    reenable_devices()?;
    
    // Restore system state
    restore_system_state()?;
    
    info!("System resumed from suspend");
    Ok(())
}

/// Restore RAM from self-refresh
fn restore_ram_from_self_refresh() -> Result<(), KernelError> {
    info!("Restoring RAM from self-refresh...");
    
    Ok(())
}

/// Re-enable devices after resume
fn reenable_devices() -> Result<(), KernelError> {
    info!("Re-enabling devices...");
    
    Ok(())
}

/// Restore system state after resume
fn restore_system_state() -> Result<(), KernelError> {
    info!("Restoring system state...");
    
    Ok(())
}

/// Get power measurement data
pub fn get_power_measurement() -> Result<PowerMeasurement, KernelError> {
    // This would query actual power monitoring hardware
    
    Ok(PowerMeasurement {
        current_mw: 2500,
        voltage_mv: 850,
        current_ma: 2941,
        average_mw: 2300,
        peak_mw: 4500,
        energy_mj: 12345678,
    })
}

/// Enable power saving mode
pub fn enable_power_saving_mode() -> Result<(), KernelError> {
    info!("Enabling power saving mode...");
    
    // Reduce CPU frequency
    set_cpu_frequency(1200)?;
    
    // Reduce GPU frequency
    set_gpu_frequency(300)?;
    
    // Configure display for power saving
    configure_display_power_saving()?;
    
    Ok(())
}

/// Configure display for power saving
fn configure_display_power_saving() -> Result<(), KernelError> {
    info!("Configuring display for power saving...");
    
    // Reduce screen brightness
    // Enable adaptive brightness
    // Configure screen timeout
    
    Ok(())
}

/// Disable power saving mode
pub fn disable_power_saving_mode() -> Result<(), KernelError> {
    info!("Disabling power saving mode...");
    
    // Restore maximum frequencies
    set_cpu_frequency(2400)?;
    set_gpu_frequency(600)?;
    
    Ok(())
}