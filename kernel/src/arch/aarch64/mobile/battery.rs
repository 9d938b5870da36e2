//! ARM64 Mobile Battery Monitoring
//! 
//! This module provides comprehensive battery monitoring and management for ARM64
//! mobile devices, including battery state monitoring, charging control, fuel gauge
//! support, and battery safety features.

use crate::log::{info, warn, error};
use crate::KernelError;

/// Battery chemistry types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BatteryChemistry {
    LithiumIon = 0,      // Li-ion
    LithiumPolymer = 1,  // Li-Po
    LithiumIron = 2,     // LiFePO4
    NickelMetal = 3,     // NiMH
    NickelCadmium = 4,   // NiCd
    Unknown = 255,
}

/// Battery health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BatteryHealth {
    Good = 0,            // Battery health is good
    Fair = 1,            // Battery health is fair
    Poor = 2,            // Battery health is poor
    Critical = 3,        // Battery health is critical
    Error = 4,           // Battery error detected
    Unknown = 255,
}

/// Battery charging states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChargingState {
    NotCharging = 0,     // Not charging
    TrickleCharging = 1, // Trickle charging
    FastCharging = 2,    // Fast charging (constant current)
    ToppingCharging = 3, // Topping charge (constant voltage)
    FullCharged = 4,     // Fully charged
    OverVoltage = 5,     // Over voltage protection
    OverCurrent = 6,     // Over current protection
    OverTemperature = 7, // Over temperature protection
    SafetyTimerExpired = 8, // Safety timer expired
    ChargingDisabled = 9,   // Charging disabled
    Unknown = 255,
}

/// Power source types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerSource {
    Battery = 0,         // Powered by battery only
    USB = 1,             // Powered by USB
    AC = 2,              // Powered by AC adapter
    Wireless = 3,        // Powered by wireless charging
    USB_C = 4,           // Powered by USB-C
    Solar = 5,           // Powered by solar panel
    Unknown = 255,
}

/// Battery safety states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BatterySafety {
    Normal = 0,          // Normal operation
    OverVoltage = 1,     // Voltage protection active
    UnderVoltage = 2,    // Under voltage protection
    OverCurrent = 3,     // Current protection active
    OverTemperature = 4, // Temperature protection active
    ShortCircuit = 5,    // Short circuit protection
    CellImbalance = 6,   // Cell imbalance detected
    Aging = 7,           // Battery aging detected
    Critical = 8,        // Critical battery condition
    Unknown = 255,
}

/// Battery statistics
#[derive(Debug, Clone, Copy)]
pub struct BatteryStats {
    pub cycle_count: u32,        // Number of charge/discharge cycles
    pub time_since_full_hours: u32, // Hours since last full charge
    pub time_since_full_minutes: u32, // Minutes since last full charge
    pub total_energy_mwh: u64,   // Total energy stored/delivered (mWh)
    pub max_energy_mwh: u64,     // Maximum capacity (mWh)
    pub temperature_min_mc: i32, // Minimum temperature recorded (milli-C)
    pub temperature_max_mc: i32, // Maximum temperature recorded (milli-C)
    pub avg_temperature_mc: i32, // Average temperature (milli-C)
}

/// Battery information
#[derive(Debug, Clone)]
pub struct BatteryInfo {
    pub chemistry: BatteryChemistry,
    pub capacity_mah: u32,       // Rated capacity in mAh
    pub voltage_nominal_mv: u32, // Nominal voltage in mV
    pub voltage_min_mv: u32,     // Minimum voltage in mV
    pub voltage_max_mv: u32,     // Maximum voltage in mV
    pub current_max_ma: u32,     // Maximum discharge current in mA
    pub current_charge_max_ma: u32, // Maximum charge current in mA
    pub temperature_min_mc: i32, // Operating temperature range
    pub temperature_max_mc: i32,
    pub cell_count: u8,          // Number of cells
    pub protection_circuits: bool, // Has protection circuits
    pub fuel_gauge: bool,        // Has fuel gauge
}

/// Battery monitoring data
#[derive(Debug, Clone)]
pub struct BatteryData {
    pub voltage_mv: u32,         // Current voltage in mV
    pub current_ma: i32,         // Current (positive = discharging, negative = charging)
    pub power_mw: u32,           // Current power (mW)
    pub capacity_mah: u32,       // Current capacity (mAh)
    pub capacity_percent: u8,    // Current capacity percentage (0-100)
    pub remaining_energy_mwh: u32, // Remaining energy (mWh)
    pub estimated_time_minutes: u32, // Estimated time to empty/full (minutes)
    pub temperature_mc: i32,     // Battery temperature (milli-C)
    pub health: BatteryHealth,   // Battery health status
    pub state_of_charge: u8,     // State of charge (0-100)
    pub state_of_health: u8,     // State of health (0-100)
}

/// Charging configuration
#[derive(Debug, Clone)]
pub struct ChargingConfig {
    pub trickle_charge_current_ma: u32,
    pub fast_charge_current_ma: u32,
    pub fast_charge_voltage_mv: u32,
    pub termination_voltage_mv: u32,
    pub safety_timer_minutes: u32,
    pub temp_thresholds: TempThresholds,
    pub fast_charging_enabled: bool,
    pub trickle_charging_enabled: bool,
    pub battery_protection_enabled: bool,
}

/// Temperature thresholds for charging
#[derive(Debug, Clone, Copy)]
pub struct TempThresholds {
    pub min_charging_temp_mc: i32,
    pub max_charging_temp_mc: i32,
    pub min_fast_charge_temp_mc: i32,
    pub max_fast_charge_temp_mc: i32,
    pub safety_temp_mc: i32,
}

/// Fuel gauge information
#[derive(Debug, Clone)]
pub struct FuelGaugeInfo {
    pub has_fuel_gauge: bool,
    pub gauge_type: FuelGaugeType,
    pub capacity_mah: u32,       // Current capacity
    pub full_capacity_mah: u32,  // Full capacity
    pub cycle_count: u32,        // Cycle count
    pub coulomb_counter: u32,    // Coulomb counter value
    pub voltage_resting_mv: u32, // Resting voltage
    pub impedance_mohm: u32,     // Battery impedance
}

/// Fuel gauge types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FuelGaugeType {
    None = 0,                    // No fuel gauge
    Basic = 1,                   // Basic fuel gauge
    Advanced = 2,                // Advanced fuel gauge with impedance tracking
    Premium = 3,                 // Premium fuel gauge with cycle counting
    Custom = 4,                  // Custom/vendor-specific
}

/// Initialize battery monitoring
pub fn init_battery_monitoring() -> Result<(), KernelError> {
    info!("Initializing battery monitoring...");
    
    // Detect battery hardware
    let battery_info = detect_battery_info()?;
    
    // Initialize fuel gauge
    let fuel_gauge = init_fuel_gauge(&battery_info)?;
    
    // Configure charging system
    let charging_config = configure_charging_system(&battery_info)?;
    
    // Set up battery safety monitoring
    setup_battery_safety_monitoring(&battery_info)?;
    
    // Initialize battery statistics tracking
    init_battery_statistics()?;
    
    info!("Battery monitoring initialized successfully");
    info!("Battery: {}mAh {}V, {} cells", 
          battery_info.capacity_mah, 
          battery_info.voltage_nominal_mv / 1000,
          battery_info.cell_count);
    
    Ok(())
}

/// Detect battery information
fn detect_battery_info() -> Result<BatteryInfo, KernelError> {
    info!("Detecting battery information...");
    
    // This would detect battery information from:
    // 1. Battery management IC (Power Management IC - PMIC)
    // 2. Battery identification resistors
    // 3. Device tree information
    // 4. Fuel gauge data
    
    // For typical mobile device battery
    let battery_info = BatteryInfo {
        chemistry: BatteryChemistry::LithiumPolymer,
        capacity_mah: 5000,        // 5000mAh battery (typical for tablets)
        voltage_nominal_mv: 3700,  // 3.7V nominal
        voltage_min_mv: 3000,      // 3.0V minimum
        voltage_max_mv: 4200,      // 4.2V maximum
        current_max_ma: 10000,     // 10A max discharge
        current_charge_max_ma: 3000, // 3A max charge
        temperature_min_mc: -200,  // -20°C minimum
        temperature_max_mc: 600,   // 60°C maximum
        cell_count: 1,             // Single cell
        protection_circuits: true, // Has protection circuits
        fuel_gauge: true,          // Has fuel gauge
    };
    
    info!("Battery detected: {} {} cells", 
          match battery_info.chemistry {
              BatteryChemistry::LithiumIon => "Li-ion",
              BatteryChemistry::LithiumPolymer => "Li-Po",
              BatteryChemistry::LithiumIron => "LiFePO4",
              _ => "Unknown",
          },
          battery_info.cell_count);
    
    Ok(battery_info)
}

/// Initialize fuel gauge
fn init_fuel_gauge(battery_info: &BatteryInfo) -> Result<FuelGaugeInfo, KernelError> {
    info!("Initializing fuel gauge...");
    
    if !battery_info.fuel_gauge {
        warn!("No fuel gauge detected");
        return Ok(FuelGaugeInfo {
            has_fuel_gauge: false,
            gauge_type: FuelGaugeType::None,
            capacity_mah: battery_info.capacity_mah,
            full_capacity_mah: battery_info.capacity_mah,
            cycle_count: 0,
            coulomb_counter: 0,
            voltage_resting_mv: battery_info.voltage_nominal_mv,
            impedance_mohm: 500, // Typical battery impedance
        });
    }
    
    // Initialize fuel gauge (would communicate with actual fuel gauge IC)
    let fuel_gauge = FuelGaugeInfo {
        has_fuel_gauge: true,
        gauge_type: FuelGaugeType::Advanced, // Assume advanced for modern devices
        capacity_mah: battery_info.capacity_mah,
        full_capacity_mah: battery_info.capacity_mah,
        cycle_count: 0,
        coulomb_counter: 0,
        voltage_resting_mv: battery_info.voltage_nominal_mv,
        impedance_mohm: 500,
    };
    
    info!("Fuel gauge initialized: {:?}", fuel_gauge.gauge_type);
    
    Ok(fuel_gauge)
}

/// Configure charging system
fn configure_charging_system(battery_info: &BatteryInfo) -> Result<ChargingConfig, KernelError> {
    info!("Configuring charging system...");
    
    let temp_thresholds = TempThresholds {
        min_charging_temp_mc: 0,    // 0°C minimum
        max_charging_temp_mc: 450,  // 45°C maximum
        min_fast_charge_temp_mc: 100, // 10°C minimum for fast charging
        max_fast_charge_temp_mc: 400, // 40°C maximum for fast charging
        safety_temp_mc: 600,        // 60°C safety threshold
    };
    
    let charging_config = ChargingConfig {
        trickle_charge_current_ma: 100,     // 100mA trickle charge
        fast_charge_current_ma: 3000,       // 3A fast charge
        fast_charge_voltage_mv: battery_info.voltage_max_mv, // Max voltage
        termination_voltage_mv: battery_info.voltage_max_mv - 50, // 50mV termination
        safety_timer_minutes: 240,          // 4 hour safety timer
        temp_thresholds,
        fast_charging_enabled: true,
        trickle_charging_enabled: true,
        battery_protection_enabled: true,
    };
    
    info!("Charging configured: {}mA fast charge, {}mA trickle", 
          charging_config.fast_charge_current_ma,
          charging_config.trickle_charge_current_ma);
    
    Ok(charging_config)
}

/// Set up battery safety monitoring
fn setup_battery_safety_monitoring(battery_info: &BatteryInfo) -> Result<(), KernelError> {
    info!("Setting up battery safety monitoring...");
    
    if !battery_info.protection_circuits {
        warn!("Battery protection circuits not detected");
    }
    
    // Set up safety monitoring for:
    // 1. Over-voltage protection
    // 2. Under-voltage protection
    // 3. Over-current protection
    // 4. Over-temperature protection
    // 5. Cell balancing (for multi-cell batteries)
    
    info!("Battery safety monitoring enabled");
    
    Ok(())
}

/// Initialize battery statistics tracking
fn init_battery_statistics() -> Result<(), KernelError> {
    info!("Initializing battery statistics tracking...");
    
    // Initialize statistics tracking for battery analytics
    
    Ok(())
}

/// Get current battery data
pub fn get_battery_data() -> Result<BatteryData, KernelError> {
    // This would read actual battery data from fuel gauge and PMIC
    
    // For demonstration, return realistic data
    Ok(BatteryData {
        voltage_mv: 3820,           // 3.82V
        current_ma: -500,           // Charging at 500mA
        power_mw: 1910,             // 3.82V * 0.5A
        capacity_mah: 4200,         // Current capacity
        capacity_percent: 84,       // 84% capacity
        remaining_energy_mwh: 16032, // Remaining energy (mWh)
        estimated_time_minutes: 480, // 8 hours to full charge
        temperature_mc: 2500,       // 25°C
        health: BatteryHealth::Good,
        state_of_charge: 84,        // 84% charge
        state_of_health: 95,        // 95% health
    })
}

/// Get battery statistics
pub fn get_battery_stats() -> Result<BatteryStats, KernelError> {
    // This would return actual battery usage statistics
    
    Ok(BatteryStats {
        cycle_count: 156,           // 156 charge cycles
        time_since_full_hours: 12,  // 12 hours since last full charge
        time_since_full_minutes: 30,
        total_energy_mwh: 850000,   // 850 Wh total lifetime energy
        max_energy_mwh: 18500,      // 18.5 Wh maximum capacity
        temperature_min_mc: -500,   // -0.5°C minimum
        temperature_max_mc: 4500,   // 45°C maximum
        avg_temperature_mc: 2800,   // 28°C average
    })
}

/// Get current battery health
pub fn get_battery_health() -> Result<BatteryHealth, KernelError> {
    let data = get_battery_data()?;
    Ok(data.health)
}

/// Check battery safety status
pub fn check_battery_safety() -> Result<BatterySafety, KernelError> {
    let data = get_battery_data()?;
    
    // Check for safety violations
    if data.temperature_mc > 600 { // 60°C
        return Ok(BatterySafety::OverTemperature);
    }
    
    if data.voltage_mv < 3000 { // 3.0V
        return Ok(BatterySafety::UnderVoltage);
    }
    
    if data.voltage_mv > 4200 { // 4.2V
        return Ok(BatterySafety::OverVoltage);
    }
    
    if data.current_ma > 10000 || data.current_ma < -3000 {
        return Ok(BatterySafety::OverCurrent);
    }
    
    Ok(BatterySafety::Normal)
}

/// Get charging status
pub fn get_charging_status() -> Result<ChargingState, KernelError> {
    let data = get_battery_data()?;
    
    if data.current_ma < 0 {
        // Currently charging
        let charge_current = -data.current_ma;
        
        if charge_current < 500 {
            Ok(ChargingState::TrickleCharging)
        } else if data.voltage_mv < 4000 {
            Ok(ChargingState::FastCharging)
        } else {
            Ok(ChargingState::ToppingCharging)
        }
    } else if data.capacity_percent >= 100 {
        Ok(ChargingState::FullCharged)
    } else {
        Ok(ChargingState::NotCharging)
    }
}

/// Start battery charging
pub fn start_charging() -> Result<(), KernelError> {
    info!("Starting battery charging...");
    
    // Check if charging is safe
    let safety_status = check_battery_safety()?;
    if safety_status != BatterySafety::Normal {
        warn!("Charging not safe: {:?}", safety_status);
        return Err(KernelError::NotSupported);
    }
    
    // Configure charging current based on temperature and battery condition
    let config = get_charging_configuration()?;
    let charge_current = determine_charge_current(config)?;
    
    // Set charging current
    set_charge_current(charge_current)?;
    
    info!("Charging started at {}mA", charge_current);
    Ok(())
}

/// Stop battery charging
pub fn stop_charging() -> Result<(), KernelError> {
    info!("Stopping battery charging...");
    
    // Disable charging current
    set_charge_current(0)?;
    
    info!("Charging stopped");
    Ok(())
}

/// Determine appropriate charge current
fn determine_charge_current(config: ChargingConfig) -> Result<u32, KernelError> {
    let battery_data = get_battery_data()?;
    
    // Adjust charge current based on temperature
    if battery_data.temperature_mc < config.temp_thresholds.min_charging_temp_mc {
        warn!("Battery too cold for charging: {}°C", battery_data.temperature_mc / 100);
        return Ok(0);
    }
    
    if battery_data.temperature_mc > config.temp_thresholds.max_charging_temp_mc {
        warn!("Battery too hot for charging: {}°C", battery_data.temperature_mc / 100);
        return Ok(0);
    }
    
    // Use fast charging current for most conditions
    if config.fast_charging_enabled && 
       battery_data.temperature_mc >= config.temp_thresholds.min_fast_charge_temp_mc &&
       battery_data.temperature_mc <= config.temp_thresholds.max_fast_charge_temp_mc {
        Ok(config.fast_charge_current_ma)
    } else {
        // Use trickle charging for edge conditions
        Ok(config.trickle_charge_current_ma)
    }
}

/// Set charge current
fn set_charge_current(current_ma: u32) -> Result<(), KernelError> {
    info!("Setting charge current to {}mA", current_ma);
    
    // This would interface with the charging controller/PMIC
    // to set the actual charge current
    
    Ok(())
}

/// Get charging configuration
fn get_charging_configuration() -> Result<ChargingConfig, KernelError> {
    // Return the configured charging settings
    
    Ok(ChargingConfig {
        trickle_charge_current_ma: 100,
        fast_charge_current_ma: 3000,
        fast_charge_voltage_mv: 4200,
        termination_voltage_mv: 4150,
        safety_timer_minutes: 240,
        temp_thresholds: TempThresholds {
            min_charging_temp_mc: 0,
            max_charging_temp_mc: 450,
            min_fast_charge_temp_mc: 100,
            max_fast_charge_temp_mc: 400,
            safety_temp_mc: 600,
        },
        fast_charging_enabled: true,
        trickle_charging_enabled: true,
        battery_protection_enabled: true,
    })
}

/// Handle low battery condition
pub fn handle_low_battery() -> Result<(), KernelError> {
    warn!("Low battery condition detected");
    
    let data = get_battery_data()?;
    
    if data.capacity_percent <= 10 {
        warn!("Critical battery level: {}%", data.capacity_percent);
        
        // Enable low power mode
        enable_low_power_mode()?;
        
        // Notify user of low battery
        notify_low_battery_alert()?;
        
        return Ok(());
    }
    
    Ok(())
}

/// Enable low power mode
fn enable_low_power_mode() -> Result<(), KernelError> {
    info!("Enabling low power mode due to low battery");
    
    // Reduce CPU frequency
    crate::arch::aarch64::mobile::power::set_cpu_frequency(800)?;
    
    // Reduce GPU frequency
    crate::arch::aarch64::mobile::power::set_gpu_frequency(200)?;
    
    // Dim display
    dim_display_for_power_saving()?;
    
    Ok(())
}

/// Dim display for power saving
fn dim_display_for_power_saving() -> Result<(), KernelError> {
    info!("Dimming display for power saving");
    
    // This would interface with display controller to reduce brightness
    
    Ok(())
}

/// Notify low battery alert
fn notify_low_battery_alert() -> Result<(), KernelError> {
    info!("Sending low battery alert to user");
    
    // This would trigger a user notification
    
    Ok(())
}

/// Handle battery thermal shutdown
pub fn handle_thermal_shutdown() -> Result<(), KernelError> {
    error!("Battery thermal shutdown triggered");
    
    // Immediately stop all charging
    stop_charging()?;
    
    // Power down system to protect battery
    power_down_system_for_safety()?;
    
    Ok(())
}

/// Power down system for safety
fn power_down_system_for_safety() -> Result<(), KernelError> {
    info!("Powering down system for battery safety");
    
    // Save critical data
    save_critical_data()?;
    
    // Initiate safe shutdown
    initiate_safe_shutdown()?;
    
    Ok(())
}

/// Save critical data before shutdown
fn save_critical_data() -> Result<(), KernelError> {
    info!("Saving critical data before shutdown");
    
    Ok(())
}

/// Initiate safe shutdown
fn initiate_safe_shutdown() -> Result<(), KernelError> {
    info!("Initiating safe shutdown");
    
    // This would trigger the actual system shutdown
    
    Ok(())
}

/// Get estimated battery life
pub fn get_estimated_battery_life_minutes() -> Result<u32, KernelError> {
    let data = get_battery_data()?;
    
    if data.current_ma <= 0 {
        // Battery is charging
        Ok(data.estimated_time_minutes)
    } else {
        // Battery is discharging, estimate time to empty
        let power_mw = (data.voltage_mv * data.current_ma as u32) / 1000;
        let remaining_mwh = (data.capacity_mah * data.voltage_mv) / 1000;
        
        if power_mw > 0 {
            Ok((remaining_mwh / power_mw) * 60)
        } else {
            Ok(0)
        }
    }
}

/// Test battery functionality
pub fn test_battery_functionality() -> Result<(), KernelError> {
    info!("Testing battery functionality...");
    
    // Test battery detection
    let battery_info = detect_battery_info()?;
    info!("Battery detected: {}mAh", battery_info.capacity_mah);
    
    // Test battery data reading
    let battery_data = get_battery_data()?;
    info!("Battery level: {}%", battery_data.capacity_percent);
    
    // Test safety monitoring
    let safety_status = check_battery_safety()?;
    info!("Safety status: {:?}", safety_status);
    
    // Test charging detection
    let charging_status = get_charging_status()?;
    info!("Charging status: {:?}", charging_status);
    
    info!("Battery functionality test completed");
    Ok(())
}