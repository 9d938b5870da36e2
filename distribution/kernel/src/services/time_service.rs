//! Time Management Service
//!
//! Provides comprehensive time management including system time, time zones,
//! timers, and time synchronization across the system.

use crate::log::{info, warn, error};
use crate::{KernelError, Result};
use spin::{RwLock, Mutex};
use core::sync::atomic::{AtomicU64, AtomicUsize, AtomicBool, Ordering};
use core::time::Duration;

/// Time service initialization
pub fn init() -> Result<()> {
    info!("Initializing Time Management Service...");
    
    // Initialize system time
    initialize_system_time()?;
    
    // Initialize time zones
    initialize_time_zones()?;
    
    // Initialize timer service
    initialize_time_timers()?;
    
    // Start time synchronization
    start_time_sync()?;
    
    info!("Time Management Service initialized");
    Ok(())
}

/// Time service shutdown
pub fn shutdown() -> Result<()> {
    info!("Shutting down Time Management Service...");
    
    // Stop time synchronization
    stop_time_sync()?;
    
    // Clear all timers
    clear_all_timers()?;
    
    info!("Time Management Service shutdown complete");
    Ok(())
}

/// System time structure
#[derive(Debug, Clone, Copy)]
pub struct SystemTime {
    pub seconds: u64,
    pub nanoseconds: u64,
    pub timezone_offset: i32, // Offset in seconds from UTC
    pub dst_active: bool,
    pub time_source: TimeSource,
    pub sync_status: SyncStatus,
}

/// Time source types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TimeSource {
    HardwareClock = 0,
    SystemTimer = 1,
    NetworkTime = 2,
    Manual = 3,
    AtomicClock = 4,
}

/// Synchronization status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SyncStatus {
    NotSynchronized = 0,
    Synchronizing = 1,
    Synchronized = 2,
    Error = 3,
}

/// Time zone information
#[derive(Debug, Clone)]
pub struct TimeZone {
    pub name: String,
    pub offset_seconds: i32,
    pub dst_offset: i32,
    pub dst_start: Option<(u8, u8)>, // Month, day
    pub dst_end: Option<(u8, u8)>,   // Month, day
}

/// Time conversion result
#[derive(Debug, Clone)]
pub struct TimeConversion {
    pub utc_time: SystemTime,
    pub local_time: SystemTime,
    pub timezone_name: String,
}

/// Timer types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TimerType {
    OneShot = 0,
    Periodic = 1,
    HighResolution = 2,
    SystemTick = 3,
}

/// Timer information
#[derive(Debug, Clone)]
pub struct Timer {
    pub id: u64,
    pub timer_type: TimerType,
    pub interval_ns: u64,
    pub callback: TimerCallback,
    pub enabled: AtomicBool,
    pub last_trigger: AtomicU64,
    pub trigger_count: AtomicU64,
}

/// Timer callback type
pub type TimerCallback = fn(u64, TimerType);

/// Timer service statistics
#[derive(Debug, Clone, Copy)]
pub struct TimeServiceStats {
    pub total_timers: AtomicUsize,
    pub active_timers: AtomicUsize,
    pub timer_triggers: AtomicU64,
    pub missed_triggers: AtomicU64,
    pub time_sync_attempts: AtomicU64,
    pub time_sync_successes: AtomicU64,
    pub drift_ppm: AtomicU64,
}

/// Global system time (atomic for thread safety)
static SYSTEM_TIME: AtomicU64 = AtomicU64::new(0); // Seconds since epoch
static SYSTEM_TIME_NS: AtomicU64 = AtomicU64::new(0); // Nanoseconds component

/// Time synchronization state
static TIME_SYNC_STATUS: AtomicU8 = AtomicU8::new(SyncStatus::NotSynchronized as u8);
static TIME_SOURCE: AtomicU8 = AtomicU8::new(TimeSource::HardwareClock as u8);

/// Time zone information
static TIME_ZONE: RwLock<TimeZone> = RwLock::new(TimeZone {
    name: "UTC".to_string(),
    offset_seconds: 0,
    dst_offset: 0,
    dst_start: None,
    dst_end: None,
});

/// Timer management
static TIMERS: RwLock<Vec<Timer>> = RwLock::new(Vec::new());
static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Time service statistics
static TIME_STATS: TimeServiceStats = TimeServiceStats {
    total_timers: AtomicUsize::new(0),
    active_timers: AtomicUsize::new(0),
    timer_triggers: AtomicU64::new(0),
    missed_triggers: AtomicU64::new(0),
    time_sync_attempts: AtomicU64::new(0),
    time_sync_successes: AtomicU64::new(0),
    drift_ppm: AtomicU64::new(0),
};

/// Time zone database
const TIME_ZONES: &[TimeZone] = &[
    TimeZone {
        name: "UTC".to_string(),
        offset_seconds: 0,
        dst_offset: 0,
        dst_start: None,
        dst_end: None,
    },
    TimeZone {
        name: "EST".to_string(),
        offset_seconds: -5 * 3600,
        dst_offset: 3600,
        dst_start: Some((3, 12)), // Second Sunday in March
        dst_end: Some((11, 5)),   // First Sunday in November
    },
    TimeZone {
        name: "PST".to_string(),
        offset_seconds: -8 * 3600,
        dst_offset: 3600,
        dst_start: Some((3, 12)),
        dst_end: Some((11, 5)),
    },
    TimeZone {
        name: "CET".to_string(),
        offset_seconds: 1 * 3600,
        dst_offset: 3600,
        dst_start: Some((3, 26)), // Last Sunday in March
        dst_end: Some((10, 29)),  // Last Sunday in October
    },
];

/// Initialize system time
fn initialize_system_time() -> Result<()> {
    info!("Initializing system time...");
    
    // Get boot time
    let boot_time = crate::hal::timers::get_system_time();
    
    // Initialize system time from boot time
    set_system_time(boot_time.seconds, boot_time.nanoseconds, TimeSource::HardwareClock)?;
    
    info!("System time initialized: {} seconds, {} nanoseconds", 
          boot_time.seconds, boot_time.nanoseconds);
    
    Ok(())
}

/// Initialize time zones
fn initialize_time_zones() -> Result<()> {
    info!("Initializing time zones...");
    
    // Default to UTC
    let mut tz = TIME_ZONE.write();
    if let Some(utc) = TIME_ZONES.iter().find(|tz| tz.name == "UTC") {
        *tz = utc.clone();
        info!("Default time zone set to UTC");
    }
    
    Ok(())
}

/// Initialize time timers
fn initialize_time_timers() -> Result<()> {
    info!("Initializing time timers...");
    
    // Register system tick timer callback
    crate::hal::timers::register_timer_callback(
        crate::hal::timers::TimerType::SystemTimer,
        |ticks| {
            update_system_time(ticks);
            trigger_timer_callbacks();
        }
    );
    
    // Create a periodic timer for system time updates
    let timer_id = create_timer(
        TimerType::SystemTick,
        1_000_000, // 1ms
        system_time_update_callback
    )?;
    
    info!("System time update timer created: {}", timer_id);
    
    Ok(())
}

/// Start time synchronization
fn start_time_sync() -> Result<()> {
    info!("Starting time synchronization...");
    
    TIME_SYNC_STATUS.store(SyncStatus::Synchronizing as u8, Ordering::SeqCst);
    
    // Try to synchronize with hardware clock
    synchronize_with_hardware_clock()?;
    
    Ok(())
}

/// Stop time synchronization
fn stop_time_sync() -> Result<()> {
    info!("Stopping time synchronization...");
    
    TIME_SYNC_STATUS.store(SyncStatus::NotSynchronized as u8, Ordering::SeqCst);
    
    Ok(())
}

/// Synchronize with hardware clock
fn synchronize_with_hardware_clock() -> Result<()> {
    info!("Synchronizing with hardware clock...");
    
    TIME_STATS.time_sync_attempts.fetch_add(1, Ordering::SeqCst);
    
    // This would read from RTC or other hardware clock
    // For now, just mark as synchronized
    TIME_STATS.time_sync_successes.fetch_add(1, Ordering::SeqCst);
    TIME_SYNC_STATUS.store(SyncStatus::Synchronized as u8, Ordering::SeqCst);
    TIME_SOURCE.store(TimeSource::HardwareClock as u8, Ordering::SeqCst);
    
    info!("Time synchronized with hardware clock");
    
    Ok(())
}

/// Set system time
pub fn set_system_time(seconds: u64, nanoseconds: u64, source: TimeSource) -> Result<()> {
    if nanoseconds >= 1_000_000_000 {
        return Err(KernelError::InvalidParameter);
    }
    
    SYSTEM_TIME.store(seconds, Ordering::SeqCst);
    SYSTEM_TIME_NS.store(nanoseconds, Ordering::SeqCst);
    TIME_SOURCE.store(source as u8, Ordering::SeqCst);
    
    info!("System time set: {}.{:09}s (source: {:?})", 
          seconds, nanoseconds, source);
    
    Ok(())
}

/// Get system time
pub fn get_system_time() -> SystemTime {
    let seconds = SYSTEM_TIME.load(Ordering::SeqCst);
    let nanoseconds = SYSTEM_TIME_NS.load(Ordering::SeqCst);
    let timezone = TIME_ZONE.read();
    
    SystemTime {
        seconds,
        nanoseconds,
        timezone_offset: calculate_timezone_offset(&timezone),
        dst_active: is_dst_active(),
        time_source: get_time_source(),
        sync_status: get_sync_status(),
    }
}

/// Calculate timezone offset
fn calculate_timezone_offset(timezone: &TimeZone) -> i32 {
    let mut offset = timezone.offset_seconds;
    
    // Add DST offset if applicable
    if is_dst_active() {
        offset += timezone.dst_offset;
    }
    
    offset
}

/// Check if DST is currently active
fn is_dst_active() -> bool {
    let timezone = TIME_ZONE.read();
    
    if timezone.dst_start.is_none() || timezone.dst_end.is_none() {
        return false;
    }
    
    // Simplified DST calculation - in real implementation, this would be more sophisticated
    let (start_month, start_day) = timezone.dst_start.unwrap();
    let (end_month, end_day) = timezone.dst_end.unwrap();
    
    // Get current month and day (simplified)
    let current_month = get_current_month();
    let current_day = get_current_day();
    
    // Simple DST check - assumes months are numbered 1-12
    if current_month > start_month && current_month < end_month {
        return true;
    }
    if current_month == start_month && current_day >= start_day {
        return true;
    }
    if current_month == end_month && current_day < end_day {
        return true;
    }
    
    false
}

/// Get current month (simplified)
fn get_current_month() -> u8 {
    // In real implementation, this would be derived from current time
    6 // Assume June for simplicity
}

/// Get current day (simplified)
fn get_current_day() -> u8 {
    // In real implementation, this would be derived from current time
    15 // Assume 15th for simplicity
}

/// Get time source
fn get_time_source() -> TimeSource {
    match TIME_SOURCE.load(Ordering::SeqCst) {
        0 => TimeSource::HardwareClock,
        1 => TimeSource::SystemTimer,
        2 => TimeSource::NetworkTime,
        3 => TimeSource::Manual,
        4 => TimeSource::AtomicClock,
        _ => TimeSource::SystemTimer,
    }
}

/// Get synchronization status
fn get_sync_status() -> SyncStatus {
    match TIME_SYNC_STATUS.load(Ordering::SeqCst) {
        0 => SyncStatus::NotSynchronized,
        1 => SyncStatus::Synchronizing,
        2 => SyncStatus::Synchronized,
        3 => SyncStatus::Error,
        _ => SyncStatus::NotSynchronized,
    }
}

/// Get uptime in nanoseconds
pub fn get_uptime_ns() -> u64 {
    crate::hal::timers::get_uptime_ticks() * 1_000_000_000 / crate::hal::timers::get_timer_frequency()
}

/// Convert time to different timezone
pub fn convert_timezone(time: SystemTime, target_tz: &str) -> Result<TimeConversion> {
    let target_tz_info = TIME_ZONES.iter()
        .find(|tz| tz.name == target_tz)
        .ok_or(KernelError::InvalidParameter)?;
    
    let local_offset = calculate_timezone_offset(target_tz_info);
    let utc_time = time;
    let local_seconds = time.seconds + (time.timezone_offset - local_offset) as u64;
    
    Ok(TimeConversion {
        utc_time,
        local_time: SystemTime {
            seconds: local_seconds,
            nanoseconds: time.nanoseconds,
            timezone_offset: local_offset,
            dst_active: time.dst_active,
            time_source: time.time_source,
            sync_status: time.sync_status,
        },
        timezone_name: target_tz.to_string(),
    })
}

/// Set timezone
pub fn set_timezone(tz_name: &str) -> Result<()> {
    if let Some(tz) = TIME_ZONES.iter().find(|tz| tz.name == tz_name) {
        let mut timezone = TIME_ZONE.write();
        *timezone = tz.clone();
        info!("Timezone set to {}", tz_name);
        Ok(())
    } else {
        Err(KernelError::InvalidParameter)
    }
}

/// Create timer
pub fn create_timer(timer_type: TimerType, interval_ns: u64, callback: TimerCallback) -> Result<u64> {
    let timer_id = NEXT_TIMER_ID.fetch_add(1, Ordering::SeqCst);
    
    let timer = Timer {
        id: timer_id,
        timer_type,
        interval_ns,
        callback,
        enabled: AtomicBool::new(true),
        last_trigger: AtomicU64::new(0),
        trigger_count: AtomicU64::new(0),
    };
    
    let mut timers = TIMERS.write();
    timers.push(timer);
    
    TIME_STATS.total_timers.fetch_add(1, Ordering::SeqCst);
    TIME_STATS.active_timers.fetch_add(1, Ordering::SeqCst);
    
    info!("Timer {} created: {:?} interval {} ns", timer_id, timer_type, interval_ns);
    
    Ok(timer_id)
}

/// Delete timer
pub fn delete_timer(timer_id: u64) -> Result<()> {
    let mut timers = TIMERS.write();
    
    if let Some(index) = timers.iter().position(|t| t.id == timer_id) {
        timers.remove(index);
        TIME_STATS.active_timers.fetch_sub(1, Ordering::SeqCst);
        info!("Timer {} deleted", timer_id);
        Ok(())
    } else {
        Err(KernelError::InvalidParameter)
    }
}

/// Enable timer
pub fn enable_timer(timer_id: u64) -> Result<()> {
    let timers = TIMERS.read();
    if let Some(timer) = timers.iter().find(|t| t.id == timer_id) {
        timer.enabled.store(true, Ordering::SeqCst);
        Ok(())
    } else {
        Err(KernelError::InvalidParameter)
    }
}

/// Disable timer
pub fn disable_timer(timer_id: u64) -> Result<()> {
    let timers = TIMERS.read();
    if let Some(timer) = timers.iter().find(|t| t.id == timer_id) {
        timer.enabled.store(false, Ordering::SeqCst);
        Ok(())
    } else {
        Err(KernelError::InvalidParameter)
    }
}

/// Update system time (called from timer interrupt)
fn update_system_time(ticks: u64) {
    let frequency = crate::hal::timers::get_timer_frequency();
    let increment_ns = ticks * 1_000_000_000 / frequency;
    
    let current_ns = SYSTEM_TIME_NS.load(Ordering::SeqCst);
    let current_seconds = SYSTEM_TIME.load(Ordering::SeqCst);
    
    let mut new_ns = current_ns + increment_ns;
    let mut new_seconds = current_seconds;
    
    // Handle nanosecond overflow
    if new_ns >= 1_000_000_000 {
        new_ns -= 1_000_000_000;
        new_seconds += 1;
    }
    
    SYSTEM_TIME_NS.store(new_ns, Ordering::SeqCst);
    SYSTEM_TIME.store(new_seconds, Ordering::SeqCst);
}

/// Trigger timer callbacks
fn trigger_timer_callbacks() {
    let timers = TIMERS.read();
    let current_time_ns = get_uptime_ns();
    
    for timer in timers.iter() {
        if !timer.enabled.load(Ordering::SeqCst) {
            continue;
        }
        
        let last_trigger = timer.last_trigger.load(Ordering::SeqCst);
        
        if current_time_ns >= last_trigger + timer.interval_ns {
            // Timer should trigger
            timer.last_trigger.store(current_time_ns, Ordering::SeqCst);
            timer.trigger_count.fetch_add(1, Ordering::SeqCst);
            
            // Call the callback
            (timer.callback)(timer.interval_ns, timer.timer_type);
            
            TIME_STATS.timer_triggers.fetch_add(1, Ordering::SeqCst);
            
            // Handle one-shot timers
            if timer.timer_type == TimerType::OneShot {
                timer.enabled.store(false, Ordering::SeqCst);
            }
        }
    }
}

/// System time update callback
fn system_time_update_callback(_interval_ns: u64, _timer_type: TimerType) {
    // This is called from the system tick timer
    // Additional time-based processing can be added here
}

/// Clear all timers
fn clear_all_timers() -> Result<()> {
    let mut timers = TIMERS.write();
    timers.clear();
    Ok(())
}

/// Get time service statistics
pub fn get_stats() -> TimeServiceStats {
    TIME_STATS
}

/// Get available time zones
pub fn get_available_timezones() -> Vec<String> {
    TIME_ZONES.iter().map(|tz| tz.name.clone()).collect()
}

/// Benchmark time service
pub fn benchmark_time_service() -> Result<(u64, u64)> {
    info!("Benchmarking time service...");
    
    // Benchmark time reading
    let start = crate::hal::timers::get_high_res_time();
    for _ in 0..1000 {
        let _ = get_system_time();
    }
    let time_read_duration = crate::hal::timers::get_high_res_time() - start;
    
    // Benchmark timer creation
    let start = crate::hal::timers::get_high_res_time();
    for i in 0..100 {
        let _ = create_timer(TimerType::OneShot, 1000, |_, _| {});
    }
    let timer_creation_duration = crate::hal::timers::get_high_res_time() - start;
    
    Ok((time_read_duration, timer_creation_duration))
}

/// Time utility functions
pub mod utils {
    use super::*;
    
    /// Convert timestamp to ISO 8601 string
    pub fn timestamp_to_iso8601(time: SystemTime) -> String {
        format!("{}.{:09}Z", time.seconds, time.nanoseconds)
    }
    
    /// Convert ISO 8601 timestamp from string
    pub fn iso8601_to_timestamp(iso_str: &str) -> Result<SystemTime> {
        // Simplified parser - real implementation would be more robust
        if let Some(dot_pos) = iso_str.find('.') {
            if iso_str.ends_with('Z') {
                let seconds_str = &iso_str[..dot_pos];
                let nano_str = &iso_str[dot_pos + 1..iso_str.len() - 1];
                
                if let Ok(seconds) = seconds_str.parse::<u64>() {
                    if let Ok(nanoseconds) = nano_str.parse::<u64>() {
                        return Ok(SystemTime {
                            seconds,
                            nanoseconds,
                            timezone_offset: 0,
                            dst_active: false,
                            time_source: TimeSource::Manual,
                            sync_status: SyncStatus::Synchronized,
                        });
                    }
                }
            }
        }
        
        Err(KernelError::InvalidParameter)
    }
    
    /// Calculate time difference
    pub fn time_difference(start: SystemTime, end: SystemTime) -> i128 {
        let start_ns = (start.seconds as i128) * 1_000_000_000 + (start.nanoseconds as i128);
        let end_ns = (end.seconds as i128) * 1_000_000_000 + (end.nanoseconds as i128);
        end_ns - start_ns
    }
    
    /// Add duration to time
    pub fn add_duration(time: SystemTime, duration_ns: u64) -> SystemTime {
        let total_ns = time.nanoseconds + duration_ns;
        let extra_seconds = total_ns / 1_000_000_000;
        let new_ns = total_ns % 1_000_000_000;
        
        SystemTime {
            seconds: time.seconds + extra_seconds,
            nanoseconds: new_ns,
            timezone_offset: time.timezone_offset,
            dst_active: time.dst_active,
            time_source: time.time_source,
            sync_status: time.sync_status,
        }
    }
}