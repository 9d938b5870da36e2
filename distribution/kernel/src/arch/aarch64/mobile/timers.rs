//! ARM64 Mobile Timer and Interrupt Handling
//! 
//! This module provides ARM64-specific timer and interrupt handling optimized
//! for mobile devices, including system timer, ARM Generic Timer, PIT (Programmable
//! Interrupt Timer), and mobile-specific interrupt sources.

use crate::log::{info, warn, error};
use crate::KernelError;

/// ARM64 Generic Timer types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GenericTimerType {
    SystemTimer = 0,      // System counter (global)
    PhysicalTimer = 1,    // Physical timer for EL1
    VirtualTimer = 2,     // Virtual timer for EL1
    HypervisorTimer = 3,  // Virtual timer for EL2
}

/// Timer interrupt sources for mobile devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MobileInterrupt {
    SystemTimer = 30,     // EL1 Physical Timer
    VirtualTimer = 27,    // EL1 Virtual Timer
    PhysicalTimer = 26,   // EL1 Physical Timer
    VirtualTimerEL2 = 28, // EL2 Virtual Timer
    HardwareTimer = 19,   // Platform-specific timer
    RtcTimer = 35,        // Real-Time Clock
    WatchdogTimer = 38,   // Watchdog timer
    SleepTimer = 36,      // Sleep timer
}

/// Mobile timer configuration
#[derive(Debug, Clone, Copy)]
pub struct MobileTimerConfig {
    pub timer_frequency: u64,     // Timer frequency in Hz
    pub tick_frequency: u64,      // System tick frequency
    pub use_64bit_timers: bool,   // Use 64-bit timer registers
    pub power_save_timers: bool,  // Enable power-saving timer modes
    pub low_power_mode: bool,     // Configure for low-power operation
}

/// Power management timer modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerTimerMode {
    Active = 0,        // Full-speed operation
    LowPower = 1,      // Reduced frequency for power saving
    DeepSleep = 2,     // Suspended timer for deep sleep
    WakeOnly = 3,      // Only wake timer active
}

/// Initialize ARM64-specific mobile timers
pub fn init_mobile_timers() -> Result<(), KernelError> {
    info!("Initializing ARM64 mobile timers...");
    
    // Detect available timers
    let timer_config = detect_timer_config()?;
    
    // Initialize ARM Generic Timer
    init_generic_timer(&timer_config)?;
    
    // Initialize platform-specific timers
    init_platform_timers()?;
    
    // Configure power management timers
    init_power_timers()?;
    
    // Set up timer interrupt handlers
    setup_timer_interrupts()?;
    
    // Configure system tick for mobile scheduling
    configure_system_tick(&timer_config)?;
    
    info!("ARM64 mobile timers initialized successfully");
    Ok(())
}

/// Detect timer configuration
fn detect_timer_config() -> Result<MobileTimerConfig, KernelError> {
    // Detect timer frequency and capabilities
    
    // Read CNTFRQ_EL0 to get timer frequency
    let timer_frequency = read_cntfrq();
    
    // Detect ARMv8-A timer capabilities
    let has_64bit_timers = true; // ARMv8-A has 64-bit timers
    
    // Determine power management requirements
    let power_save_timers = true;
    let low_power_mode = true;
    
    // Choose appropriate tick frequency (typically 100Hz or 250Hz)
    let tick_frequency = 100; // 100Hz for mobile power efficiency
    
    info!("Timer frequency detected: {} Hz", timer_frequency);
    
    Ok(MobileTimerConfig {
        timer_frequency,
        tick_frequency,
        use_64bit_timers: has_64bit_timers,
        power_save_timers,
        low_power_mode,
    })
}

/// Initialize ARM Generic Timer
fn init_generic_timer(config: &MobileTimerConfig) -> Result<(), KernelError> {
    info!("Initializing ARM Generic Timer...");
    
    // Configure timer frequency
    write_cntfrq(config.timer_frequency);
    
    // Initialize system counter
    init_system_counter()?;
    
    // Initialize EL1 physical timer
    init_el1_physical_timer()?;
    
    // Initialize EL1 virtual timer
    init_el1_virtual_timer()?;
    
    Ok(())
}

/// Initialize system counter
fn init_system_counter() -> Result<(), KernelError> {
    info!("Initializing system counter...");
    
    // The system counter (CNTFRQ) is typically read-only
    // It provides a consistent frequency across all cores
    
    let frequency = read_cntfrq();
    info!("System counter frequency: {} Hz", frequency);
    
    // Enable system counter if needed
    // Most ARM systems have the counter always enabled
    
    Ok(())
}

/// Initialize EL1 physical timer
fn init_el1_physical_timer() -> Result<(), KernelError> {
    info!("Initializing EL1 physical timer...");
    
    // CNTP_TVAL_EL0 - Physical Timer Value Register
    // CNTP_CTL_EL0 - Physical Timer Control Register
    
    // Set initial timer value (will be configured by scheduler)
    write_cntp_tval(0);
    
    // Enable timer with interrupts
    let control = read_cntp_ctl();
    write_cntp_ctl(control | 0x1); // Enable bit
    
    Ok(())
}

/// Initialize EL1 virtual timer
fn init_el1_virtual_timer() -> Result<(), KernelError> {
    info!("Initializing EL1 virtual timer...");
    
    // CNTV_TVAL_EL0 - Virtual Timer Value Register
    // CNTV_CTL_EL0 - Virtual Timer Control Register
    
    // Set initial timer value
    write_cntv_tval(0);
    
    // Enable timer with interrupts
    let control = read_cntv_ctl();
    write_cntv_ctl(control | 0x1); // Enable bit
    
    Ok(())
}

/// Initialize platform-specific timers
fn init_platform_timers() -> Result<(), KernelError> {
    info!("Initializing platform-specific timers...");
    
    // Initialize timers for:
    // - Watchdog timer for system recovery
    // - Real-time clock for timekeeping
    // - Sleep/wake timers for power management
    // - Hardware-specific timers
    
    // This would be device-specific and depend on the SoC
    
    Ok(())
}

/// Initialize power management timers
fn init_power_timers() -> Result<(), KernelError> {
    info!("Initializing power management timers...");
    
    // Set up timers for various power states:
    // - CPU idle timers
    // - Deep sleep timers
    // - Wake alarm timers
    
    // Configure wake timer for mobile standby
    setup_wake_timer()?;
    
    Ok(())
}

/// Set up wake timer for mobile devices
fn setup_wake_timer() -> Result<(), KernelError> {
    info!("Setting up wake timer...");
    
    // Configure wake timer to handle mobile sleep/wake cycles
    // This timer should remain active during system sleep to wake the device
    
    // Set wake timer frequency (typically much lower than system tick)
    let wake_frequency = 1000; // 1Hz for wake timing
    
    // This would typically use a different timer source
    
    Ok(())
}

/// Set up timer interrupt handlers
fn setup_timer_interrupts() -> Result<(), KernelError> {
    info!("Setting up timer interrupt handlers...");
    
    // Configure interrupt handling for:
    // - System timer (ticks)
    // - Physical timer (scheduling)
    // - Virtual timer (scheduling)
    // - Power management timers
    // - Wake timer
    
    // Register interrupt handlers
    // This would integrate with the existing interrupt system
    
    Ok(())
}

/// Configure system tick for mobile scheduling
fn configure_system_tick(config: &MobileTimerConfig) -> Result<(), KernelError> {
    info!("Configuring system tick at {} Hz...", config.tick_frequency);
    
    // Set up periodic timer interrupt for system tick
    // This drives the scheduler and other time-sensitive operations
    
    // Calculate timer reload value
    let timer_value = config.timer_frequency / config.tick_frequency;
    
    // Configure timer for periodic interrupts
    write_cntp_tval(timer_value);
    
    info!("System tick configured: {} Hz", config.tick_frequency);
    
    Ok(())
}

/// Get current system time from ARM Generic Timer
pub fn get_system_time() -> Result<u64, KernelError> {
    // Read CNTVCT_EL0 - Virtual Count Register
    let time = read_cntvct();
    Ok(time)
}

/// Get high-resolution timestamp
pub fn get_high_res_timestamp() -> Result<u64, KernelError> {
    // Use the most precise timer available (typically CNTVCT)
    get_system_time()
}

/// Calculate time difference
pub fn calculate_time_diff(start_time: u64, end_time: u64) -> u64 {
    if end_time >= start_time {
        end_time - start_time
    } else {
        // Handle timer wraparound
        (u64::MAX - start_time) + end_time + 1
    }
}

/// Set timer for interrupt-based scheduling
pub fn set_scheduling_timer(ticks_ahead: u64) -> Result<(), KernelError> {
    // Set EL1 physical timer for scheduling
    let current_time = get_system_time()?;
    let timer_value = current_time + ticks_ahead;
    
    write_cntp_tval(timer_value);
    
    Ok(())
}

/// Set low-power timer mode
pub fn set_power_timer_mode(mode: PowerTimerMode) -> Result<(), KernelError> {
    info!("Setting power timer mode: {:?}", mode);
    
    match mode {
        PowerTimerMode::Active => {
            // Full-speed operation
            set_timer_frequency(1)?;
        },
        PowerTimerMode::LowPower => {
            // Reduced frequency
            set_timer_frequency(10)?;
        },
        PowerTimerMode::DeepSleep => {
            // Suspend most timers
            disable_non_wake_timers()?;
        },
        PowerTimerMode::WakeOnly => {
            // Only wake timer active
            enable_wake_only_mode()?;
        },
    }
    
    Ok(())
}

/// Set timer frequency for power management
fn set_timer_frequency(power_scaling: u32) -> Result<(), KernelError> {
    // Adjust timer frequency based on power requirements
    // This would interface with CPU frequency scaling
    
    info!("Adjusting timer frequency scaling factor: {}", power_scaling);
    
    Ok(())
}

/// Disable non-wake timers for deep sleep
fn disable_non_wake_timers() -> Result<(), KernelError> {
    info!("Disabling non-wake timers for deep sleep...");
    
    // Disable system timer, scheduling timers
    // Keep only wake timer active
    
    let cntp_ctl = read_cntp_ctl();
    write_cntp_ctl(cntp_ctl & !0x1); // Disable
    
    Ok(())
}

/// Enable wake-only mode
fn enable_wake_only_mode() -> Result<(), KernelError> {
    info!("Enabling wake-only timer mode...");
    
    // Only enable wake timer, disable all others
    disable_non_wake_timers()?;
    enable_wake_timer()?;
    
    Ok(())
}

/// Enable wake timer
fn enable_wake_timer() -> Result<(), KernelError> {
    // Enable the wake timer (platform-specific implementation)
    
    // For now, we'll use a placeholder
    info!("Wake timer enabled");
    
    Ok(())
}

/// Timer register access functions
mod registers {
    use super::*;
    
    pub fn read_cntfrq() -> u64 {
        let mut value: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntfrq_el0", out(reg) value);
        }
        value
    }
    
    pub fn write_cntfrq(value: u64) {
        unsafe {
            core::arch::asm!("msr cntfrq_el0, {}", in(reg) value);
        }
    }
    
    pub fn read_cntvct() -> u64 {
        let mut value: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntvct_el0", out(reg) value);
        }
        value
    }
    
    pub fn read_cntpct() -> u64 {
        let mut value: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntpct_el0", out(reg) value);
        }
        value
    }
    
    pub fn read_cntp_tval() -> u64 {
        let mut value: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntp_tval_el0", out(reg) value);
        }
        value
    }
    
    pub fn write_cntp_tval(value: u64) {
        unsafe {
            core::arch::asm!("msr cntp_tval_el0, {}", in(reg) value);
        }
    }
    
    pub fn read_cntp_ctl() -> u64 {
        let mut value: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntp_ctl_el0", out(reg) value);
        }
        value
    }
    
    pub fn write_cntp_ctl(value: u64) {
        unsafe {
            core::arch::asm!("msr cntp_ctl_el0, {}", in(reg) value);
        }
    }
    
    pub fn read_cntv_tval() -> u64 {
        let mut value: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntv_tval_el0", out(reg) value);
        }
        value
    }
    
    pub fn write_cntv_tval(value: u64) {
        unsafe {
            core::arch::asm!("msr cntv_tval_el0, {}", in(reg) value);
        }
    }
    
    pub fn read_cntv_ctl() -> u64 {
        let mut value: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntv_ctl_el0", out(reg) value);
        }
        value
    }
    
    pub fn write_cntv_ctl(value: u64) {
        unsafe {
            core::arch::asm!("msr cntv_ctl_el0, {}", in(reg) value);
        }
    }
}

// Re-export register functions
pub use registers::*;

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_timer_frequency_detection() {
        let freq = read_cntfrq();
        assert!(freq > 0);
        assert!(freq >= 100_000_000); // At least 100 MHz
        assert!(freq <= 3_000_000_000); // At most 3 GHz
    }
    
    #[test]
    fn test_time_advancement() {
        let start = get_system_time().unwrap();
        
        // Busy wait a bit
        for i in 0..1000 {
            let _ = i;
        }
        
        let end = get_system_time().unwrap();
        assert!(end > start);
    }
    
    #[test]
    fn test_timer_mode_configuration() {
        let result = set_power_timer_mode(PowerTimerMode::LowPower);
        assert!(result.is_ok());
    }
}