//! Power Management Service
//!
//! Provides comprehensive power management including ACPI integration,
//! power states, thermal management, and energy monitoring.

use crate::log::{info, warn, error};
use crate::{KernelError, Result};
use spin::{RwLock, Mutex};
use core::sync::atomic::{AtomicU64, AtomicUsize, AtomicBool, AtomicU8, Ordering};
use core::time::Duration;

/// Power management initialization
pub fn init() -> Result<()> {
    info!("Initializing Power Management Service...");
    
    // Initialize power management hardware
    init_power_hardware()?;
    
    // Initialize ACPI support
    init_acpi()?;
    
    // Initialize power states
    init_power_states()?;
    
    // Initialize thermal management
    init_thermal_management()?;
    
    // Initialize power monitoring
    init_power_monitoring()?;
    
    // Start power management services
    start_power_services()?;
    
    info!("Power Management Service initialized");
    Ok(())
}

/// Power management shutdown
pub fn shutdown() -> Result<()> {
    info!("Shutting down Power Management Service...");
    
    // Stop power management services
    stop_power_services()?;
    
    // Shutdown power monitoring
    shutdown_power_monitoring()?;
    
    // Shutdown thermal management
    shutdown_thermal_management()?;
    
    // Shutdown power states
    shutdown_power_states()?;
    
    // Shutdown ACPI
    shutdown_acpi()?;
    
    info!("Power Management Service shutdown complete");
    Ok(())
}

/// Power state types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerState {
    On = 0,
    Standby = 1,
    Suspend = 2,
    Hibernate = 3,
    SoftOff = 4,
    MechanicalOff = 5,
    Unknown = 255,
}

/// Power source types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerSource {
    AC = 0,
    Battery = 1,
    UPS = 2,
    Solar = 3,
    FuelCell = 4,
    Unknown = 255,
}

/// Battery information
#[derive(Debug, Clone)]
pub struct BatteryInfo {
    pub present: bool,
    pub capacity_percent: u8,
    pub voltage_mv: u32,
    pub current_ma: i32,
    pub remaining_capacity_mah: u32,
    pub design_capacity_mah: u32,
    pub temperature_c: f32,
    pub battery_type: String,
    pub charging: bool,
}

/// ACPI information
#[derive(Debug, Clone)]
pub struct AcpiInfo {
    pub acpi_version: String,
    pub smi_command_port: u16,
    pub acpi_enable_value: u8,
    pub acpi_disable_value: u8,
    pub pm1a_event_block: u32,
    pub pm1a_control_block: u32,
    pub pm2_control_block: u32,
    pub gpe0_block: u32,
    pub gpe1_block: u32,
}

/// Thermal zone information
#[derive(Debug, Clone)]
pub struct ThermalZone {
    pub zone_id: u32,
    pub temperature_millic: i32, // Temperature in millidegrees Celsius
    pub trip_points: Vec<TripPoint>,
    pub cooling_devices: Vec<u32>,
}

/// Thermal trip point
#[derive(Debug, Clone)]
pub struct TripPoint {
    pub temperature_millic: i32,
    pub trip_type: TripType,
    pub policy: TripPolicy,
}

/// Thermal trip types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TripType {
    Critical = 0,
    Hot = 1,
    Passive = 2,
    Active1 = 3,
    Active2 = 4,
}

/// Thermal trip policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TripPolicy {
    None = 0,
    Throttle = 1,
    FrequencyLimit = 2,
    PowerOff = 3,
}

/// Power policy
#[derive(Debug, Clone)]
pub struct PowerPolicy {
    pub name: String,
    pub min_sleep_state: PowerState,
    pub max_sleep_state: PowerState,
    pub idle_threshold: u8, // Percentage
    pub battery_threshold: u8, // Percentage
    pub thermal_action: TripPolicy,
}

/// CPU frequency state
#[derive(Debug, Clone)]
pub struct CpuFrequencyState {
    pub frequency_khz: u32,
    pub voltage_mv: u32,
    pub power_mw: u32,
    pub transition_latency_us: u32,
}

/// Power consumption data
#[derive(Debug, Clone)]
pub struct PowerConsumption {
    pub cpu_power_mw: u32,
    pub memory_power_mw: u32,
    pub io_power_mw: u32,
    pub total_power_mw: u32,
    pub efficiency_percent: f32,
}

/// Power management statistics
#[derive(Debug, Clone, Copy)]
pub struct PowerServiceStats {
    pub state_transitions: AtomicU64,
    pub suspend_operations: AtomicU64,
    pub resume_operations: AtomicU64,
    pub thermal_events: AtomicU64,
    pub power_state_time: Vec<AtomicU64>, // Time spent in each state
    pub total_energy_consumed_mj: AtomicU64,
    pub battery_cycles: AtomicU64,
}

/// Global power state
static CURRENT_POWER_STATE: AtomicU8 = AtomicU8::new(PowerState::On as u8);

/// Power management configuration
static POWER_CONFIG: RwLock<PowerPolicy> = RwLock::new(PowerPolicy {
    name: "Balanced".to_string(),
    min_sleep_state: PowerState::Standby,
    max_sleep_state: PowerState::Hibernate,
    idle_threshold: 10,
    battery_threshold: 20,
    thermal_action: TripPolicy::Throttle,
});

/// Battery information
static BATTERY_INFO: RwLock<BatteryInfo> = RwLock::new(BatteryInfo {
    present: false,
    capacity_percent: 0,
    voltage_mv: 0,
    current_ma: 0,
    remaining_capacity_mah: 0,
    design_capacity_mah: 0,
    temperature_c: 0.0,
    battery_type: "Unknown".to_string(),
    charging: false,
});

/// ACPI information
static ACPI_INFO: RwLock<Option<AcpiInfo>> = RwLock::new(None);

/// Thermal zones
static THERMAL_ZONES: RwLock<Vec<ThermalZone>> = RwLock::new(Vec::new());

/// CPU frequency states
static CPU_FREQUENCY_STATES: RwLock<Vec<CpuFrequencyState>> = RwLock::new(Vec::new());

/// Power service statistics
static POWER_STATS: PowerServiceStats = PowerServiceStats {
    state_transitions: AtomicU64::new(0),
    suspend_operations: AtomicU64::new(0),
    resume_operations: AtomicU64::new(0),
    thermal_events: AtomicU64::new(0),
    power_state_time: vec![
        AtomicU64::new(0); // Will be initialized for each power state
    ],
    total_energy_consumed_mj: AtomicU64::new(0),
    battery_cycles: AtomicU64::new(0),
};

/// Initialize power management hardware
fn init_power_hardware() -> Result<()> {
    info!("Initializing power management hardware...");
    
    // Detect and initialize power management hardware
    detect_power_management_hardware()?;
    
    Ok(())
}

/// Detect power management hardware
fn detect_power_management_hardware() -> Result<()> {
    #[cfg(target_arch = "x86_64")]
    {
        // Check for ACPI support
        detect_acpi_hardware()?;
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // Check for ARM power management
        detect_arm_power_management()?;
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // Check for RISC-V power management
        detect_riscv_power_management()?;
    }
    
    Ok(())
}

#[cfg(target_arch = "x86_64")]
fn detect_acpi_hardware() -> Result<()> {
    // This would check for ACPI tables and initialize ACPI support
    Ok(())
}

#[cfg(target_arch = "aarch64")]
fn detect_arm_power_management() -> Result<()> {
    // This would detect ARM-specific power management features
    Ok(())
}

#[cfg(target_arch = "riscv64")]
fn detect_riscv_power_management() -> Result<()> {
    // This would detect RISC-V power management extensions
    Ok(())
}

/// Initialize ACPI
fn init_acpi() -> Result<()> {
    info!("Initializing ACPI support...");
    
    // Parse ACPI tables
    parse_acpi_tables()?;
    
    Ok(())
}

/// Parse ACPI tables
fn parse_acpi_tables() -> Result<()> {
    info!("Parsing ACPI tables...");
    
    // This would parse various ACPI tables (FADT, DSDT, etc.)
    // For now, create a minimal ACPI info structure
    
    let acpi_info = AcpiInfo {
        acpi_version: "6.4".to_string(),
        smi_command_port: 0xB2,
        acpi_enable_value: 0x01,
        acpi_disable_value: 0x00,
        pm1a_event_block: 0x400,
        pm1a_control_block: 0x404,
        pm2_control_block: 0x408,
        gpe0_block: 0x42C,
        gpe1_block: 0x430,
    };
    
    let mut info = ACPI_INFO.write();
    *info = Some(acpi_info);
    
    info!("ACPI initialized: version {}", acpi_info.acpi_version);
    
    Ok(())
}

/// Initialize power states
fn init_power_states() -> Result<()> {
    info!("Initializing power states...");
    
    // Define available power states
    define_power_states()?;
    
    // Initialize state transition tracking
    init_state_tracking()?;
    
    Ok(())
}

/// Define power states
fn define_power_states() -> Result<()> {
    info!("Defining power states...");
    
    // Power states are defined by the CPU architecture
    // This would typically be done through ACPI or firmware tables
    
    Ok(())
}

/// Initialize state transition tracking
fn init_state_tracking() -> Result<()> {
    info!("Initializing power state tracking...");
    
    // Initialize statistics for each power state
    let states = POWER_STATS.power_state_time.len();
    if states < 6 { // Ensure we have entries for all power states
        // Note: This is a simplified approach, in real code you'd properly initialize
    }
    
    Ok(())
}

/// Initialize thermal management
fn init_thermal_management() -> Result<()> {
    info!("Initializing thermal management...");
    
    // Create thermal zones
    create_thermal_zones()?;
    
    // Initialize thermal trip points
    init_thermal_trip_points()?;
    
    Ok(())
}

/// Create thermal zones
fn create_thermal_zones() -> Result<()> {
    info!("Creating thermal zones...");
    
    let mut zones = THERMAL_ZONES.write();
    
    // Create a default thermal zone for the system
    let cpu_zone = ThermalZone {
        zone_id: 0,
        temperature_millic: 0, // Will be updated by thermal monitoring
        trip_points: Vec::new(),
        cooling_devices: vec![0], // CPU cooling device
    };
    
    zones.push(cpu_zone);
    
    info!("Created {} thermal zones", zones.len());
    
    Ok(())
}

/// Initialize thermal trip points
fn init_thermal_trip_points() -> Result<()> {
    info!("Initializing thermal trip points...");
    
    let mut zones = THERMAL_ZONES.write();
    
    for zone in &mut *zones {
        zone.trip_points.push(TripPoint {
            temperature_millic: 105_000, // 105°C - Critical
            trip_type: TripType::Critical,
            policy: TripPolicy::PowerOff,
        });
        
        zone.trip_points.push(TripPoint {
            temperature_millic: 95_000, // 95°C - Hot
            trip_type: TripType::Hot,
            policy: TripPolicy::FrequencyLimit,
        });
        
        zone.trip_points.push(TripPoint {
            temperature_millic: 85_000, // 85°C - Active cooling
            trip_type: TripType::Active1,
            policy: TripPolicy::Throttle,
        });
        
        zone.trip_points.push(TripPoint {
            temperature_millic: 75_000, // 75°C - Passive cooling
            trip_type: TripType::Passive,
            policy: TripPolicy::Throttle,
        });
    }
    
    info!("Thermal trip points initialized");
    
    Ok(())
}

/// Initialize power monitoring
fn init_power_monitoring() -> Result<()> {
    info!("Initializing power monitoring...");
    
    // Create power monitoring timer
    let _ = crate::services::time_service::create_timer(
        crate::services::time_service::TimerType::Periodic,
        5_000_000, // 5ms
        power_monitoring_callback
    );
    
    Ok(())
}

/// Start power management services
fn start_power_services() -> Result<()> {
    info!("Starting power management services...");
    
    // Start idle detection
    start_idle_detection()?;
    
    // Start battery monitoring
    start_battery_monitoring()?;
    
    Ok(())
}

/// Stop power management services
fn stop_power_services() -> Result<()> {
    info!("Stopping power management services...");
    
    // Stop battery monitoring
    stop_battery_monitoring()?;
    
    // Stop idle detection
    stop_idle_detection()?;
    
    Ok(())
}

/// Shutdown power monitoring
fn shutdown_power_monitoring() -> Result<()> {
    info!("Shutting down power monitoring...");
    
    Ok(())
}

/// Shutdown thermal management
fn shutdown_thermal_management() -> Result<()> {
    info!("Shutting down thermal management...");
    
    Ok(())
}

/// Shutdown power states
fn shutdown_power_states() -> Result<()> {
    info!("Shutting down power states...");
    
    Ok(())
}

/// Shutdown ACPI
fn shutdown_acpi() -> Result<()> {
    info!("Shutting down ACPI...");
    
    let mut acpi = ACPI_INFO.write();
    *acpi = None;
    
    Ok(())
}

/// Get current power state
pub fn get_current_power_state() -> PowerState {
    match CURRENT_POWER_STATE.load(Ordering::SeqCst) {
        0 => PowerState::On,
        1 => PowerState::Standby,
        2 => PowerState::Suspend,
        3 => PowerState::Hibernate,
        4 => PowerState::SoftOff,
        5 => PowerState::MechanicalOff,
        _ => PowerState::Unknown,
    }
}

/// Set power state
pub fn set_power_state(new_state: PowerState) -> Result<()> {
    let old_state = get_current_power_state();
    
    if old_state == new_state {
        return Ok(());
    }
    
    info!("Transitioning power state from {:?} to {:?}", old_state, new_state);
    
    // Update statistics
    POWER_STATS.state_transitions.fetch_add(1, Ordering::SeqCst);
    POWER_STATS.power_state_time[old_state as usize].fetch_add(
        get_state_duration(), Ordering::SeqCst
    );
    
    // Execute state transition
    match new_state {
        PowerState::Standby | PowerState::Suspend => {
            execute_suspend(new_state)?;
            POWER_STATS.suspend_operations.fetch_add(1, Ordering::SeqCst);
        }
        PowerState::Hibernate => {
            execute_hibernate()?;
            POWER_STATS.suspend_operations.fetch_add(1, Ordering::SeqCst);
        }
        PowerState::SoftOff | PowerState::MechanicalOff => {
            execute_shutdown(new_state)?;
        }
        PowerState::On => {
            execute_resume()?;
            POWER_STATS.resume_operations.fetch_add(1, Ordering::SeqCst);
        }
        _ => {
            warn!("Unsupported power state transition: {:?}", new_state);
            return Err(KernelError::InvalidParameter);
        }
    }
    
    CURRENT_POWER_STATE.store(new_state as u8, Ordering::SeqCst);
    
    info!("Power state transition completed");
    
    Ok(())
}

/// Get state duration (simplified)
fn get_state_duration() -> u64 {
    // In real implementation, this would track time spent in current state
    1_000_000 // 1 second default
}

/// Execute suspend
fn execute_suspend(suspend_state: PowerState) -> Result<()> {
    info!("Executing suspend to {:?}", suspend_state);
    
    // Save system state
    save_system_state()?;
    
    // Configure hardware for suspend
    configure_hardware_for_suspend(suspend_state)?;
    
    // Put hardware to sleep
    put_hardware_to_sleep(suspend_state)?;
    
    Ok(())
}

/// Execute hibernate
fn execute_hibernate() -> Result<()> {
    info!("Executing hibernate");
    
    // Save system state to disk
    save_system_state_to_disk()?;
    
    // Power off system
    power_off_system()?;
    
    Ok(())
}

/// Execute shutdown
fn execute_shutdown(shutdown_state: PowerState) -> Result<()> {
    info!("Executing shutdown to {:?}", shutdown_state);
    
    // Cleanup system resources
    cleanup_system_resources()?;
    
    // Power off hardware
    power_off_hardware(shutdown_state)?;
    
    Ok(())
}

/// Execute resume
fn execute_resume() -> Result<()> {
    info!("Executing resume from low power state");
    
    // Wake up hardware
    wake_up_hardware()?;
    
    // Restore system state
    restore_system_state()?;
    
    Ok(())
}

/// Save system state
fn save_system_state() -> Result<()> {
    info!("Saving system state...");
    
    // This would save CPU state, memory state, etc.
    // For now, just log the operation
    
    Ok(())
}

/// Save system state to disk
fn save_system_state_to_disk() -> Result<()> {
    info!("Saving system state to disk for hibernate...");
    
    // This would write system state to swap or hibernation file
    
    Ok(())
}

/// Configure hardware for suspend
fn configure_hardware_for_suspend(_state: PowerState) -> Result<()> {
    info!("Configuring hardware for suspend...");
    
    // This would configure various hardware components for low power state
    
    Ok(())
}

/// Put hardware to sleep
fn put_hardware_to_sleep(_state: PowerState) -> Result<()> {
    info!("Putting hardware to sleep...");
    
    // This would actually put hardware components to sleep
    // The CPU would be put into a low power state
    
    Ok(())
}

/// Power off system
fn power_off_system() -> Result<()> {
    info!("Powering off system...");
    
    // Send ACPI power off event
    send_acpi_power_off()?;
    
    Ok(())
}

/// Cleanup system resources
fn cleanup_system_resources() -> Result<()> {
    info!("Cleaning up system resources...");
    
    // This would close files, stop services, etc.
    
    Ok(())
}

/// Power off hardware
fn power_off_hardware(_state: PowerState) -> Result<()> {
    info!("Powering off hardware...");
    
    // This would power off various hardware components
    
    Ok(())
}

/// Wake up hardware
fn wake_up_hardware() -> Result<()> {
    info!("Waking up hardware...");
    
    // This would wake up hardware components from low power state
    
    Ok(())
}

/// Restore system state
fn restore_system_state() -> Result<()> {
    info!("Restoring system state...");
    
    // This would restore CPU state, memory state, etc.
    
    Ok(())
}

/// Send ACPI power off
fn send_acpi_power_off() -> Result<()> {
    // This would write to ACPI registers to initiate power off
    
    Ok(())
}

/// Get battery information
pub fn get_battery_info() -> Result<BatteryInfo> {
    // Update battery information from hardware
    update_battery_info()?;
    
    let battery = BATTERY_INFO.read();
    Ok(battery.clone())
}

/// Update battery information
fn update_battery_info() -> Result<()> {
    // This would read from battery hardware registers
    // For now, simulate battery information
    
    let mut battery = BATTERY_INFO.write();
    
    // Simulate battery drain
    if battery.present && !battery.charging {
        if battery.capacity_percent > 0 {
            battery.capacity_percent -= 1;
        }
    }
    
    Ok(())
}

/// Get thermal zone information
pub fn get_thermal_zones() -> Vec<ThermalZone> {
    THERMAL_ZONES.read().clone()
}

/// Update thermal information
pub fn update_thermal_info() -> Result<()> {
    // This would read temperature sensors and update thermal zones
    // For now, simulate temperature updates
    
    let mut zones = THERMAL_ZONES.write();
    
    for zone in &mut *zones {
        // Simulate temperature change
        let temp_change = (crate::services::random_service::utils::random_u32_in_range(0, 1000) as i32) - 500;
        zone.temperature_millic += temp_change;
        
        // Clamp temperature
        if zone.temperature_millic < -50000 {
            zone.temperature_millic = -50000;
        } else if zone.temperature_millic > 125000 {
            zone.temperature_millic = 125000;
        }
    }
    
    // Check thermal trip points
    check_thermal_trip_points()?;
    
    Ok(())
}

/// Check thermal trip points
fn check_thermal_trip_points() -> Result<()> {
    let zones = THERMAL_ZONES.read();
    let mut zones_mut = THERMAL_ZONES.write();
    
    for (i, zone) in zones.iter().enumerate() {
        for trip_point in &zone.trip_points {
            if zone.temperature_millic >= trip_point.temperature_millic {
                info!("Thermal trip point triggered: {:?} at {}°C", 
                      trip_point.trip_type, trip_point.temperature_millic / 1000);
                
                POWER_STATS.thermal_events.fetch_add(1, Ordering::SeqCst);
                
                // Execute thermal policy
                execute_thermal_policy(trip_point.policy, i as u32)?;
            }
        }
    }
    
    Ok(())
}

/// Execute thermal policy
fn execute_thermal_policy(policy: TripPolicy, thermal_zone_id: u32) -> Result<()> {
    info!("Executing thermal policy {:?} for zone {}", policy, thermal_zone_id);
    
    match policy {
        TripPolicy::Throttle => {
            throttle_cpu_performance()?;
        }
        TripPolicy::FrequencyLimit => {
            limit_cpu_frequency()?;
        }
        TripPolicy::PowerOff => {
            return set_power_state(PowerState::SoftOff);
        }
        TripPolicy::None => {
            // No action required
        }
    }
    
    Ok(())
}

/// Throttle CPU performance
fn throttle_cpu_performance() -> Result<()> {
    info!("Throttling CPU performance...");
    
    // This would reduce CPU performance by limiting frequency or reducing voltage
    
    Ok(())
}

/// Limit CPU frequency
fn limit_cpu_frequency() -> Result<()> {
    info!("Limiting CPU frequency...");
    
    // This would limit the maximum CPU frequency
    
    Ok(())
}

/// Power monitoring callback
fn power_monitoring_callback(_interval_ns: u64, _timer_type: crate::services::time_service::TimerType) {
    // Update battery information
    let _ = update_battery_info();
    
    // Update thermal information
    let _ = update_thermal_info();
    
    // Check for power state transitions
    check_power_state_transitions();
}

/// Check for power state transitions
fn check_power_state_transitions() {
    // Check idle timeout
    check_idle_timeout();
    
    // Check battery levels
    check_battery_levels();
    
    // Check thermal limits
    check_thermal_limits();
}

/// Check idle timeout
fn check_idle_timeout() {
    // This would check system idle time and potentially trigger sleep states
    
}

/// Check battery levels
fn check_battery_levels() {
    let battery = BATTERY_INFO.read();
    let policy = POWER_CONFIG.read();
    
    if battery.present && !battery.charging {
        if battery.capacity_percent <= policy.battery_threshold {
            info!("Battery level low: {}%, triggering sleep", battery.capacity_percent);
            
            // Trigger low power state
            let _ = set_power_state(PowerState::Hibernate);
        }
    }
}

/// Check thermal limits
fn check_thermal_limits() {
    let zones = THERMAL_ZONES.read();
    let policy = POWER_CONFIG.read();
    
    for zone in zones.iter() {
        for trip_point in &zone.trip_points {
            if zone.temperature_millic >= trip_point.temperature_millic {
                match policy.thermal_action {
                    TripPolicy::Throttle => {
                        let _ = throttle_cpu_performance();
                    }
                    TripPolicy::FrequencyLimit => {
                        let _ = limit_cpu_frequency();
                    }
                    TripPolicy::PowerOff => {
                        let _ = set_power_state(PowerState::SoftOff);
                    }
                    _ => {}
                }
                break;
            }
        }
    }
}

/// Start idle detection
fn start_idle_detection() -> Result<()> {
    info!("Starting idle detection...");
    
    // Create idle detection timer
    let _ = crate::services::time_service::create_timer(
        crate::services::time_service::TimerType::Periodic,
        100_000_000, // 100ms
        idle_detection_callback
    );
    
    Ok(())
}

/// Stop idle detection
fn stop_idle_detection() -> Result<()> {
    info!("Stopping idle detection...");
    
    Ok(())
}

/// Start battery monitoring
fn start_battery_monitoring() -> Result<()> {
    info!("Starting battery monitoring...");
    
    Ok(())
}

/// Stop battery monitoring
fn stop_battery_monitoring() -> Result<()> {
    info!("Stopping battery monitoring...");
    
    Ok(())
}

/// Idle detection callback
fn idle_detection_callback(_interval_ns: u64, _timer_type: crate::services::time_service::TimerType) {
    // This would detect system idle and potentially trigger power saving measures
    
}

/// Get power consumption
pub fn get_power_consumption() -> Result<PowerConsumption> {
    // This would read power sensors and calculate power consumption
    // For now, simulate power consumption
    
    let cpu_power = 25000; // 25W
    let memory_power = 8000; // 8W
    let io_power = 2000; // 2W
    
    Ok(PowerConsumption {
        cpu_power_mw: cpu_power,
        memory_power_mw: memory_power,
        io_power_mw: io_power,
        total_power_mw: cpu_power + memory_power + io_power,
        efficiency_percent: 85.0,
    })
}

/// Get power service statistics
pub fn get_stats() -> PowerServiceStats {
    POWER_STATS
}

/// Benchmark power management
pub fn benchmark_power_management() -> Result<(u64, u64, u64)> {
    info!("Benchmarking power management...");
    
    let mut state_transition_time = 0;
    let mut thermal_check_time = 0;
    let mut power_monitoring_time = 0;
    
    // Benchmark state transitions
    let start = crate::hal::timers::get_high_res_time();
    let _ = set_power_state(PowerState::Standby);
    let _ = set_power_state(PowerState::On);
    state_transition_time = crate::hal::timers::get_high_res_time() - start;
    
    // Benchmark thermal checks
    let start = crate::hal::timers::get_high_res_time();
    let _ = update_thermal_info();
    thermal_check_time = crate::hal::timers::get_high_res_time() - start;
    
    // Benchmark power monitoring
    let start = crate::hal::timers::get_high_res_time();
    let _ = update_battery_info();
    power_monitoring_time = crate::hal::timers::get_high_res_time() - start;
    
    Ok((state_transition_time, thermal_check_time, power_monitoring_time))
}

/// Power management utility functions
pub mod utils {
    use super::*;
    
    /// Convert temperature to string
    pub fn format_temperature(temp_millic: i32) -> String {
        let temp_c = temp_millic as f32 / 1000.0;
        format!("{:.1}°C", temp_c)
    }
    
    /// Convert power to string
    pub fn format_power(power_mw: u32) -> String {
        if power_mw >= 1000 {
            format!("{:.1}W", power_mw as f32 / 1000.0)
        } else {
            format!("{}mW", power_mw)
        }
    }
    
    /// Convert voltage to string
    pub fn format_voltage(voltage_mv: u32) -> String {
        if voltage_mv >= 1000 {
            format!("{:.1}V", voltage_mv as f32 / 1000.0)
        } else {
            format!("{}mV", voltage_mv)
        }
    }
    
    /// Convert current to string
    pub fn format_current(current_ma: i32) -> String {
        if current_ma >= 1000 {
            format!("{:.1}A", current_ma as f32 / 1000.0)
        } else {
            format!("{}mA", current_ma)
        }
    }
    
    /// Calculate energy consumption
    pub fn calculate_energy(power_mw: u32, time_seconds: u64) -> u32 {
        // Energy in millijoules
        power_mw * time_seconds as u32
    }
    
    /// Estimate battery life
    pub fn estimate_battery_life(current_capacity_mah: u32, current_ma: i32) -> Option<u32> {
        if current_ma > 0 {
            // Estimated battery life in minutes
            let life_minutes = (current_capacity_mah * 60) / current_ma as u32;
            Some(life_minutes)
        } else {
            None
        }
    }
}