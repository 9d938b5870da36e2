//! RISC-V Hardware Abstraction Layer for IoT Projects
//! This module provides common hardware interfaces and abstractions
//! optimized for RISC-V architectures

#![allow(dead_code)]
#![allow(unused_variables)]

use core::arch::asm;
use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use core::cell::RefCell;

// Re-export commonly used types
pub use embedded_hal::digital::{OutputPin, InputPin, StatefulOutputPin};
pub use embedded_hal::spi::{SpiBus, SpiBusWrite, SpiBusRead};
pub use embedded_hal::i2c::{I2c, I2cWrite, I2cRead};
pub use embedded_hal::pwm::PwmPin;
pub use embedded_hal::adc::Channel;

// Memory-mapped I/O addresses for RISC-V
const CLINT_BASE: usize = 0x0200_0000;
const UART0_BASE: usize = 0x1000_0000;
const GPIO_BASE: usize = 0x1001_2000;
const I2C0_BASE: usize = 0x1001_4000;
const SPI0_BASE: usize = 0x1001_6000;
const PWM_BASE: usize = 0x1001_8000;
const ADC_BASE: usize = 0x1001_A000;
const RTC_BASE: usize = 0x1001_C000;

// Interrupt priorities
const TIMER_INTERRUPT: u32 = 0x01;
const GPIO_INTERRUPT: u32 = 0x02;
const I2C_INTERRUPT: u32 = 0x03;
const SPI_INTERRUPT: u32 = 0x04;
const UART_INTERRUPT: u32 = 0x05;
const ADC_INTERRUPT: u32 = 0x06;
const PWM_INTERRUPT: u32 = 0x07;

/// System configuration for RISC-V
#[derive(Clone, Copy)]
pub struct SystemConfig {
    pub core_frequency_hz: u32,
    pub memory_size: u32,
    pub interrupt_controller: InterruptType,
    pub power_management: PowerMode,
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            core_frequency_hz: 50_000_000, // 50 MHz default
            memory_size: 512 * 1024,       // 512KB
            interrupt_controller: InterruptType::PLIC,
            power_management: PowerMode::Normal,
        }
    }
}

/// Power management modes
#[derive(Clone, Copy, Debug)]
pub enum PowerMode {
    Sleep,
    Idle,
    Normal,
    Performance,
}

impl PowerMode {
    /// Enter the specified power mode
    pub fn enter(&self) {
        match self {
            PowerMode::Sleep => unsafe { wfi() },
            PowerMode::Idle => {
                // Optimized idle with wake-up timers
                set_timer_interrupt();
                unsafe { wfi() }
            },
            PowerMode::Normal => {
                // Standard operation
            },
            PowerMode::Performance => {
                // Maximum performance settings
                set_max_performance();
            },
        }
    }
}

/// Interrupt controller types
#[derive(Clone, Copy, Debug)]
pub enum InterruptType {
    CLINT,  // Core Local INTerruptor
    PLIC,   // Platform Level Interrupt Controller
}

/// Real-time clock for timekeeping
pub struct Rtc {
    seconds: AtomicU32,
    nanoseconds: AtomicU32,
}

impl Rtc {
    pub const fn new() -> Self {
        Self {
            seconds: AtomicU32::new(0),
            nanoseconds: AtomicU32::new(0),
        }
    }

    /// Get current time
    pub fn now(&self) -> (u32, u32) {
        let seconds = self.seconds.load(Ordering::Relaxed);
        let nanoseconds = self.nanoseconds.load(Ordering::Relaxed);
        (seconds, nanoseconds)
    }

    /// Update time (called by timer interrupt)
    pub fn tick(&self) {
        let mut ns = self.nanoseconds.fetch_add(1_000_000, Ordering::Relaxed);
        if ns >= 1_000_000_000 {
            self.seconds.fetch_add(1, Ordering::Relaxed);
            self.nanoseconds.fetch_sub(1_000_000_000, Ordering::Relaxed);
        }
    }
}

/// Global RTC instance
static RTC: Rtc = Rtc::new();

/// GPIO pin configuration
#[derive(Clone, Copy, Debug)]
pub struct GpioConfig {
    pub pin_number: u8,
    pub mode: GpioMode,
    pub pull_type: PullType,
    pub drive_strength: DriveStrength,
}

#[derive(Clone, Copy, Debug)]
pub enum GpioMode {
    Input,
    Output,
    AlternateFunction,
    Analog,
}

#[derive(Clone, Copy, Debug)]
pub enum PullType {
    None,
    Up,
    Down,
    OpenDrain,
}

#[derive(Clone, Copy, Debug)]
pub enum DriveStrength {
    Low,
    Medium,
    High,
}

/// GPIO driver for RISC-V
pub struct GpioDriver {
    base_address: usize,
}

impl GpioDriver {
    pub const fn new(base_address: usize) -> Self {
        Self { base_address }
    }

    /// Configure GPIO pin
    pub fn configure(&self, config: GpioConfig) {
        let offset = (config.pin_number as usize) * 0x04;
        let mut config_word = 0u32;
        
        // Set mode
        match config.mode {
            GpioMode::Input => config_word |= 0b00,
            GpioMode::Output => config_word |= 0b01,
            GpioMode::AlternateFunction => config_word |= 0b10,
            GpioMode::Analog => config_word |= 0b11,
        }
        
        // Set pull type
        match config.pull_type {
            PullType::None => {},
            PullType::Up => config_word |= 0b00 << 2,
            PullType::Down => config_word |= 0b01 << 2,
            PullType::OpenDrain => config_word |= 0b10 << 2,
        }
        
        // Set drive strength
        match config.drive_strength {
            DriveStrength::Low => config_word |= 0b00 << 4,
            DriveStrength::Medium => config_word |= 0b01 << 4,
            DriveStrength::High => config_word |= 0b11 << 4,
        }

        unsafe {
            let config_reg = self.base_address + offset as usize;
            core::ptr::write_volatile(config_reg as *mut u32, config_word);
        }
    }

    /// Set GPIO output
    pub fn set_output(&self, pin_number: u8, high: bool) {
        let data_reg = self.base_address + 0x10;
        unsafe {
            if high {
                core::ptr::write_volatile(
                    data_reg as *mut u32,
                    1 << pin_number as u32,
                );
            } else {
                // Clear bit
                core::ptr::write_volatile(
                    data_reg as *mut u32,
                    0,
                );
            }
        }
    }

    /// Read GPIO input
    pub fn read_input(&self, pin_number: u8) -> bool {
        let input_reg = self.base_address + 0x14;
        unsafe {
            let value = core::ptr::read_volatile(input_reg as *const u32);
            (value & (1 << pin_number as u32)) != 0
        }
    }
}

/// UART driver for serial communication
pub struct Uart {
    base_address: usize,
    baud_rate: u32,
}

impl Uart {
    pub const fn new(base_address: usize, baud_rate: u32) -> Self {
        Self { base_address, baud_rate }
    }

    /// Initialize UART
    pub fn init(&mut self, config: SystemConfig) {
        // Calculate baud rate divisor
        let divisor = config.core_frequency_hz / (self.baud_rate * 16);
        
        unsafe {
            // Set divisor
            core::ptr::write_volatile(
                (self.base_address + 0x08) as *mut u32,
                divisor,
            );
            
            // Enable transmitter and receiver
            core::ptr::write_volatile(
                (self.base_address + 0x04) as *mut u32,
                0b01 | 0b10,  // TX and RX enable
            );
        }
    }

    /// Write a byte
    pub fn write_byte(&self, byte: u8) {
        while !self.is_transmit_empty() {
            // Wait until transmit buffer is empty
        }
        
        unsafe {
            core::ptr::write_volatile(
                (self.base_address + 0x00) as *mut u32,
                byte as u32,
            );
        }
    }

    /// Read a byte
    pub fn read_byte(&self) -> Option<u8> {
        if !self.is_data_ready() {
            return None;
        }
        
        unsafe {
            let value = core::ptr::read_volatile(
                (self.base_address + 0x00) as *const u32
            );
            Some(value as u8)
        }
    }

    fn is_transmit_empty(&self) -> bool {
        unsafe {
            let status = core::ptr::read_volatile(
                (self.base_address + 0x04) as *const u32
            );
            (status & 0x20) != 0  // Transmit empty flag
        }
    }

    fn is_data_ready(&self) -> bool {
        unsafe {
            let status = core::ptr::read_volatile(
                (self.base_address + 0x04) as *const u32
            );
            (status & 0x01) != 0  // Data ready flag
        }
    }
}

/// I2C bus driver
pub struct I2CBus {
    base_address: usize,
}

impl I2CBus {
    pub const fn new(base_address: usize) -> Self {
        Self { base_address }
    }

    /// Start I2C transaction
    pub fn start(&self) {
        unsafe {
            // Generate start condition
            let control = core::ptr::read_volatile(
                (self.base_address + 0x00) as *const u32
            );
            core::ptr::write_volatile(
                (self.base_address + 0x00) as *mut u32,
                control | 0x10,  // STA bit
            );
        }
    }

    /// Stop I2C transaction
    pub fn stop(&self) {
        unsafe {
            let control = core::ptr::read_volatile(
                (self.base_address + 0x00) as *const u32
            );
            core::ptr::write_volatile(
                (self.base_address + 0x00) as *mut u32,
                control | 0x08,  // STO bit
            );
        }
    }

    /// Write byte to I2C bus
    pub fn write_byte(&self, byte: u8) -> bool {
        unsafe {
            core::ptr::write_volatile(
                (self.base_address + 0x04) as *mut u32,
                byte as u32,
            );
            // Wait for acknowledge
            core::ptr::read_volatile(
                (self.base_address + 0x04) as *const u32
            ) == 0
        }
    }

    /// Read byte from I2C bus
    pub fn read_byte(&self, ack: bool) -> u8 {
        unsafe {
            let control = core::ptr::read_volatile(
                (self.base_address + 0x00) as *const u32
            );
            let control = if ack { control | 0x20 } else { control & !0x20 };
            
            core::ptr::write_volatile(
                (self.base_address + 0x00) as *mut u32,
                control,
            );
            
            core::ptr::read_volatile(
                (self.base_address + 0x04) as *const u32
            ) as u8
        }
    }
}

/// SPI bus driver
pub struct SpiBus {
    base_address: usize,
}

impl SpiBus {
    pub const fn new(base_address: usize) -> Self {
        Self { base_address }
    }

    /// Transfer data over SPI
    pub fn transfer(&self, data: &[u8]) -> &[u8] {
        for &byte in data {
            unsafe {
                // Write data to TX register
                core::ptr::write_volatile(
                    (self.base_address + 0x00) as *mut u32,
                    byte as u32,
                );
                
                // Wait for RX ready
                while (core::ptr::read_volatile(
                    (self.base_address + 0x04) as *const u32
                ) & 0x01) == 0 {}
                
                // Read received data
                let _received = core::ptr::read_volatile(
                    (self.base_address + 0x04) as *const u32
                );
            }
        }
        
        data
    }
}

/// PWM controller
pub struct Pwm {
    base_address: usize,
}

impl Pwm {
    pub const fn new(base_address: usize) -> Self {
        Self { base_address }
    }

    /// Set PWM duty cycle
    pub fn set_duty_cycle(&self, channel: u8, duty_cycle: u16, max_value: u16) {
        let period = (max_value as u32) * 16;  // Prescaled clock
        
        unsafe {
            // Set period
            core::ptr::write_volatile(
                (self.base_address + 0x00) as *mut u32,
                period,
            );
            
            // Set compare value (duty cycle)
            let compare_value = (duty_cycle as u32) * 16;
            let offset = 0x10 + (channel as usize) * 0x04;
            core::ptr::write_volatile(
                (self.base_address + offset) as *mut u32,
                compare_value,
            );
        }
    }

    /// Enable PWM channel
    pub fn enable(&self, channel: u8) {
        let enable_reg = self.base_address + 0x50;
        unsafe {
            let enable_mask = core::ptr::read_volatile(
                enable_reg as *const u32
            ) | (1 << channel as u32);
            
            core::ptr::write_volatile(
                enable_reg as *mut u32,
                enable_mask,
            );
        }
    }
}

/// ADC (Analog to Digital Converter)
pub struct Adc {
    base_address: usize,
}

impl Adc {
    pub const fn new(base_address: usize) -> Self {
        Self { base_address }
    }

    /// Read analog value
    pub fn read_channel(&self, channel: u8) -> u16 {
        unsafe {
            // Select channel
            core::ptr::write_volatile(
                (self.base_address + 0x00) as *mut u32,
                channel as u32,
            );
            
            // Start conversion
            core::ptr::write_volatile(
                (self.base_address + 0x04) as *mut u32,
                0x01,
            );
            
            // Wait for completion
            while (core::ptr::read_volatile(
                (self.base_address + 0x04) as *const u32
            ) & 0x01) != 0 {}
            
            // Read result
            core::ptr::read_volatile(
                (self.base_address + 0x08) as *const u32
            ) as u16
        }
    }
}

// Global driver instances
static GPIO_DRIVER: GpioDriver = GpioDriver::new(GPIO_BASE);
static UART_DRIVER: RefCell<Uart> = RefCell::new(Uart::new(UART0_BASE, 115200));
static I2C_DRIVER: I2CBus = I2CBus::new(I2C0_BASE);
static SPI_DRIVER: SpiBus = SpiBus::new(SPI0_BASE);
static PWM_DRIVER: Pwm = Pwm::new(PWM_BASE);
static ADC_DRIVER: Adc = Adc::new(ADC_BASE);

// Utility functions

/// Wait for interrupt (WFI instruction)
pub unsafe fn wfi() {
    asm!("wfi");
}

/// Wait for event (WFE instruction)
pub unsafe fn wfe() {
    asm!("wfe");
}

/// Set timer interrupt
fn set_timer_interrupt() {
    unsafe {
        // Enable timer interrupt in MTIE (Machine Timer Interrupt Enable)
        let mut mie = core::ptr::read_volatile(0x200 as *const u32);
        mie |= 0x20;  // Enable MTIE bit
        core::ptr::write_volatile(0x200 as *mut u32, mie);
    }
}

/// Set maximum performance settings
fn set_max_performance() {
    unsafe {
        // Set maximum frequency (if supported)
        // This would typically involve PLL configuration
        
        // Disable unnecessary power saving
        let mut power_config = core::ptr::read_volatile(0x2000_0000 as *const u32);
        power_config &= !0x03;  // Clear power saving bits
        core::ptr::write_volatile(0x2000_0000 as *mut u32, power_config);
    }
}

/// Initialize system peripherals
pub fn init_system(config: SystemConfig) {
    UART_DRIVER.borrow_mut().init(config);
    RTC.tick(); // Initialize RTC
}

/// Get current time
pub fn get_time() -> (u32, u32) {
    RTC.now()
}

/// Delay function
pub fn delay_ms(milliseconds: u32) {
    // Simple delay loop (calibrated for ~50MHz)
    let cycles_per_ms = config_system().core_frequency_hz / 1000;
    let total_cycles = cycles_per_ms * milliseconds;
    
    let mut counter = 0u32;
    unsafe {
        asm!("1: addi {counter}, {counter}, 1; bne {counter}, {total}, 1b",
             counter = inout(reg) counter,
             total = in(reg) total_cycles);
    }
}

/// Configure system (should be called once)
fn config_system() -> SystemConfig {
    // This would typically read from configuration memory
    SystemConfig::default()
}

/// Read system status
pub fn read_system_status() -> SystemStatus {
    unsafe {
        let status = core::ptr::read_volatile(0x2000_0010 as *const u32);
        
        SystemStatus {
            power_on_reset: (status & 0x01) != 0,
            watchdog_reset: (status & 0x02) != 0,
            brown_out_reset: (status & 0x04) != 0,
            external_reset: (status & 0x08) != 0,
            temperature_alert: (status & 0x10) != 0,
            voltage_alert: (status & 0x20) != 0,
        }
    }
}

/// System status information
#[derive(Clone, Copy, Debug)]
pub struct SystemStatus {
    pub power_on_reset: bool,
    pub watchdog_reset: bool,
    pub brown_out_reset: bool,
    pub external_reset: bool,
    pub temperature_alert: bool,
    pub voltage_alert: bool,
}

/// Hardware information
#[derive(Clone, Copy, Debug)]
pub struct HardwareInfo {
    pub chip_id: u64,
    pub revision: u8,
    pub serial_number: u64,
    pub flash_size: u32,
    pub ram_size: u32,
}

pub fn get_hardware_info() -> HardwareInfo {
    unsafe {
        HardwareInfo {
            chip_id: core::ptr::read_volatile(0x4000_0000 as *const u64),
            revision: core::ptr::read_volatile(0x4000_0008 as *const u8),
            serial_number: core::ptr::read_volatile(0x4000_0010 as *const u64),
            flash_size: core::ptr::read_volatile(0x4000_0018 as *const u32),
            ram_size: core::ptr::read_volatile(0x4000_001C as *const u32),
        }
    }
}