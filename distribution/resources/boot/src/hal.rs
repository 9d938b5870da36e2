//! Hardware Abstraction Layer (HAL) for Peripherals
//! 
//! This module provides a comprehensive hardware abstraction layer that allows
//! MultiOS to interact with various hardware peripherals in an architecture-independent way.

use crate::{BootError, Architecture, BootMode, HardwareInfo};
use log::{info, debug, warn, error};

/// HAL trait for hardware abstraction
pub trait HardwareAbstractionLayer {
    /// Initialize the HAL
    fn init(&mut self, info: &HardwareInfo) -> Result<(), BootError>;
    
    /// Get supported architectures
    fn supported_architectures() -> &'static [Architecture];
    
    /// Get peripheral types
    fn peripheral_types() -> &'static [PeripheralType];
}

/// Peripheral types supported by the HAL
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeripheralType {
    Uart,
    Pci,
    Usb,
    Gpio,
    I2c,
    Spi,
    Network,
    Storage,
    Timer,
    Interrupt,
    Clock,
    Power,
    Sensor,
    Display,
    Input,
    Audio,
    Crypto,
    Security,
}

/// Architecture-specific HAL implementation
pub struct ArchitectureHAL {
    arch: Architecture,
    mode: BootMode,
    initialized: bool,
}

/// HAL for x86_64 architecture
pub struct X86_64HAL {
    info: HardwareInfo,
    peripherals: PeripheralManager,
}

/// HAL for ARM64 architecture
pub struct ARM64HAL {
    info: HardwareInfo,
    peripherals: PeripheralManager,
}

/// HAL for RISC-V64 architecture
pub struct RISCV64HAL {
    info: HardwareInfo,
    peripherals: PeripheralManager,
}

/// Manages all peripheral devices
pub struct PeripheralManager {
    initialized_peripherals: Vec<PeripheralType>,
    devices: Vec<Box<dyn PeripheralDevice>>,
}

/// Generic peripheral device trait
pub trait PeripheralDevice {
    /// Initialize the peripheral device
    fn init(&mut self) -> Result<(), BootError>;
    
    /// Get peripheral type
    fn peripheral_type(&self) -> PeripheralType;
    
    /// Get device name
    fn name(&self) -> &'static str;
    
    /// Check if device is initialized
    fn is_initialized(&self) -> bool;
    
    /// Read device status
    fn read_status(&self) -> Result<DeviceStatus, BootError>;
    
    /// Configure device
    fn configure(&mut self, config: &DeviceConfig) -> Result<(), BootError>;
}

/// Device status information
#[derive(Debug, Clone, Default)]
pub struct DeviceStatus {
    pub initialized: bool,
    pub enabled: bool,
    pub error_count: u32,
    pub last_error: Option<String>,
    pub power_state: PowerState,
    pub performance_metrics: PerformanceMetrics,
}

/// Power state of a device
#[derive(Debug, Clone)]
pub enum PowerState {
    Off,
    Standby,
    On,
    Sleep,
    Hibernate,
}

/// Performance metrics for a device
#[derive(Debug, Clone, Default)]
pub struct PerformanceMetrics {
    pub throughput: u64,
    pub latency_ns: u32,
    pub utilization_percent: f32,
    pub errors_per_second: f32,
}

/// Device configuration
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    pub auto_init: bool,
    pub power_save: bool,
    pub debug_mode: bool,
    pub custom_settings: Vec<(String, String)>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            auto_init: true,
            power_save: false,
            debug_mode: false,
            custom_settings: Vec::new(),
        }
    }
}

/// UART peripheral device
pub struct UartDevice {
    base_address: u64,
    baud_rate: u32,
    data_bits: u8,
    stop_bits: u8,
    parity: Parity,
    initialized: bool,
}

/// UART parity settings
#[derive(Debug, Clone)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// PCI peripheral device
pub struct PciDevice {
    bus: u8,
    device: u8,
    function: u8,
    vendor_id: u16,
    device_id: u16,
    initialized: bool,
}

/// Timer peripheral device
pub struct TimerDevice {
    base_address: u64,
    frequency: u64,
    enabled: bool,
    initialized: bool,
}

impl ArchitectureHAL {
    /// Create new architecture HAL
    pub const fn new(arch: Architecture, mode: BootMode) -> Self {
        Self {
            arch,
            mode,
            initialized: false,
        }
    }

    /// Initialize the HAL
    pub fn init(&mut self, info: &HardwareInfo) -> Result<(), BootError> {
        info!("Initializing HAL for {:?} in {:?} mode", self.arch, self.mode);
        
        match self.arch {
            Architecture::X86_64 => self.init_x86_64(info),
            Architecture::ARM64 => self.init_arm64(info),
            Architecture::RISC_V64 => self.init_riscv64(info),
        }
    }

    /// Initialize x86_64 HAL
    fn init_x86_64(&mut self, info: &HardwareInfo) -> Result<(), BootError> {
        debug!("Initializing x86_64 HAL...");
        
        let mut hal = X86_64HAL::new(info.clone());
        hal.init_peripherals()?;
        
        self.initialized = true;
        Ok(())
    }

    /// Initialize ARM64 HAL
    fn init_arm64(&mut self, info: &HardwareInfo) -> Result<(), BootError> {
        debug!("Initializing ARM64 HAL...");
        
        let mut hal = ARM64HAL::new(info.clone());
        hal.init_peripherals()?;
        
        self.initialized = true;
        Ok(())
    }

    /// Initialize RISC-V HAL
    fn init_riscv64(&mut self, info: &HardwareInfo) -> Result<(), BootError> {
        debug!("Initializing RISC-V64 HAL...");
        
        let mut hal = RISCV64HAL::new(info.clone());
        hal.init_peripherals()?;
        
        self.initialized = true;
        Ok(())
    }

    /// Check if HAL is initialized
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get architecture
    pub const fn architecture(&self) -> Architecture {
        self.arch
    }
}

impl HardwareAbstractionLayer for X86_64HAL {
    fn init(&mut self, info: &HardwareInfo) -> Result<(), BootError> {
        self.info = info.clone();
        self.init_peripherals()
    }

    fn supported_architectures() -> &'static [Architecture] {
        &[Architecture::X86_64]
    }

    fn peripheral_types() -> &'static [PeripheralType] {
        &[
            PeripheralType::Uart,
            PeripheralType::Pci,
            PeripheralType::Usb,
            PeripheralType::Timer,
            PeripheralType::Interrupt,
        ]
    }
}

impl X86_64HAL {
    /// Create new x86_64 HAL
    pub const fn new(info: HardwareInfo) -> Self {
        Self {
            info,
            peripherals: PeripheralManager::new(),
        }
    }

    /// Initialize all peripherals
    fn init_peripherals(&mut self) -> Result<(), BootError> {
        debug!("Initializing x86_64 peripherals...");
        
        // Initialize core peripherals
        self.init_uart()?;
        self.init_pci()?;
        self.init_timer()?;
        self.init_interrupts()?;
        
        Ok(())
    }

    /// Initialize UART
    fn init_uart(&mut self) -> Result<(), BootError> {
        debug!("Initializing UART...");
        
        let mut uart = UartDevice::new(0x3F8, 115200, 8, 1, Parity::None);
        uart.init()?;
        
        self.peripherals.register_device(Box::new(uart));
        Ok(())
    }

    /// Initialize PCI
    fn init_pci(&mut self) -> Result<(), BootError> {
        debug!("Initializing PCI...");
        
        // PCI initialization
        Ok(())
    }

    /// Initialize timer
    fn init_timer(&mut self) -> Result<(), BootError> {
        debug!("Initializing timer...");
        
        let mut timer = TimerDevice::new(0x40, 1193182); // PIT frequency
        timer.init()?;
        
        self.peripherals.register_device(Box::new(timer));
        Ok(())
    }

    /// Initialize interrupts
    fn init_interrupts(&mut self) -> Result<(), BootError> {
        debug!("Initializing interrupts...");
        
        // PIC/GIC initialization
        Ok(())
    }
}

impl HardwareAbstractionLayer for ARM64HAL {
    fn init(&mut self, info: &HardwareInfo) -> Result<(), BootError> {
        self.info = info.clone();
        self.init_peripherals()
    }

    fn supported_architectures() -> &'static [Architecture] {
        &[Architecture::ARM64]
    }

    fn peripheral_types() -> &'static [PeripheralType] {
        &[
            PeripheralType::Uart,
            PeripheralType::Gpio,
            PeripheralType::I2c,
            PeripheralType::Spi,
            PeripheralType::Timer,
            PeripheralType::Interrupt,
        ]
    }
}

impl ARM64HAL {
    /// Create new ARM64 HAL
    pub const fn new(info: HardwareInfo) -> Self {
        Self {
            info,
            peripherals: PeripheralManager::new(),
        }
    }

    /// Initialize all peripherals
    fn init_peripherals(&mut self) -> Result<(), BootError> {
        debug!("Initializing ARM64 peripherals...");
        
        // Initialize ARM64 specific peripherals
        self.init_uart()?;
        self.init_gpio()?;
        self.init_timer()?;
        self.init_gic()?;
        
        Ok(())
    }

    /// Initialize UART
    fn init_uart(&mut self) -> Result<(), BootError> {
        debug!("Initializing UART...");
        
        let mut uart = UartDevice::new(0x09000000, 115200, 8, 1, Parity::None);
        uart.init()?;
        
        self.peripherals.register_device(Box::new(uart));
        Ok(())
    }

    /// Initialize GPIO
    fn init_gpio(&mut self) -> Result<(), BootError> {
        debug!("Initializing GPIO...");
        
        // GPIO initialization
        Ok(())
    }

    /// Initialize timer
    fn init_timer(&mut self) -> Result<(), BootError> {
        debug!("Initializing ARM64 timer...");
        
        let mut timer = TimerDevice::new(0x09010000, 1_000_000_000); // 1 GHz
        timer.init()?;
        
        self.peripherals.register_device(Box::new(timer));
        Ok(())
    }

    /// Initialize GIC
    fn init_gic(&mut self) -> Result<(), BootError> {
        debug!("Initializing GIC...");
        
        // GIC initialization
        Ok(())
    }
}

impl HardwareAbstractionLayer for RISCV64HAL {
    fn init(&mut self, info: &HardwareInfo) -> Result<(), BootError> {
        self.info = info.clone();
        self.init_peripherals()
    }

    fn supported_architectures() -> &'static [Architecture] {
        &[Architecture::RISC_V64]
    }

    fn peripheral_types() -> &'static [PeripheralType] {
        &[
            PeripheralType::Uart,
            PeripheralType::Gpio,
            PeripheralType::Timer,
            PeripheralType::Interrupt,
        ]
    }
}

impl RISCV64HAL {
    /// Create new RISC-V64 HAL
    pub const fn new(info: HardwareInfo) -> Self {
        Self {
            info,
            peripherals: PeripheralManager::new(),
        }
    }

    /// Initialize all peripherals
    fn init_peripherals(&mut self) -> Result<(), BootError> {
        debug!("Initializing RISC-V64 peripherals...");
        
        // Initialize RISC-V specific peripherals
        self.init_uart()?;
        self.init_timer()?;
        self.init_plic()?;
        self.init_clint()?;
        
        Ok(())
    }

    /// Initialize UART
    fn init_uart(&mut self) -> Result<(), BootError> {
        debug!("Initializing UART...");
        
        let mut uart = UartDevice::new(0x10000000, 115200, 8, 1, Parity::None);
        uart.init()?;
        
        self.peripherals.register_device(Box::new(uart));
        Ok(())
    }

    /// Initialize timer
    fn init_timer(&mut self) -> Result<(), BootError> {
        debug!("Initializing RISC-V64 timer...");
        
        let mut timer = TimerDevice::new(0x2000000, 1_000_000_000); // 1 GHz
        timer.init()?;
        
        self.peripherals.register_device(Box::new(timer));
        Ok(())
    }

    /// Initialize PLIC
    fn init_plic(&mut self) -> Result<(), BootError> {
        debug!("Initializing PLIC...");
        
        // PLIC initialization
        Ok(())
    }

    /// Initialize CLINT
    fn init_clint(&mut self) -> Result<(), BootError> {
        debug!("Initializing CLINT...");
        
        // CLINT initialization
        Ok(())
    }
}

impl PeripheralManager {
    /// Create new peripheral manager
    pub const fn new() -> Self {
        Self {
            initialized_peripherals: Vec::new(),
            devices: Vec::new(),
        }
    }

    /// Register a peripheral device
    pub fn register_device(&mut self, device: Box<dyn PeripheralDevice>) {
        self.devices.push(device);
    }

    /// Get device by type
    pub fn get_device(&self, peripheral_type: PeripheralType) -> Option<&dyn PeripheralDevice> {
        self.devices.iter().find(|device| device.peripheral_type() == peripheral_type)
    }

    /// Initialize all devices
    pub fn init_all(&mut self) -> Result<(), BootError> {
        for device in &mut self.devices {
            device.init()?;
        }
        Ok(())
    }

    /// Get all initialized peripheral types
    pub const fn initialized_types(&self) -> &[PeripheralType] {
        &self.initialized_peripherals
    }
}

impl PeripheralDevice for UartDevice {
    fn init(&mut self) -> Result<(), BootError> {
        debug!("Initializing UART at 0x{:x}, {} baud", self.base_address, self.baud_rate);
        
        // Initialize UART registers
        self.initialized = true;
        Ok(())
    }

    fn peripheral_type(&self) -> PeripheralType {
        PeripheralType::Uart
    }

    fn name(&self) -> &'static str {
        "UART"
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn read_status(&self) -> Result<DeviceStatus, BootError> {
        Ok(DeviceStatus {
            initialized: self.initialized,
            enabled: self.initialized,
            error_count: 0,
            last_error: None,
            power_state: PowerState::On,
            performance_metrics: PerformanceMetrics::default(),
        })
    }

    fn configure(&mut self, config: &DeviceConfig) -> Result<(), BootError> {
        // Configure UART based on settings
        Ok(())
    }
}

impl UartDevice {
    /// Create new UART device
    pub const fn new(base_address: u64, baud_rate: u32, data_bits: u8, stop_bits: u8, parity: Parity) -> Self {
        Self {
            base_address,
            baud_rate,
            data_bits,
            stop_bits,
            parity,
            initialized: false,
        }
    }

    /// Send a byte
    pub fn send_byte(&mut self, byte: u8) -> Result<(), BootError> {
        if !self.initialized {
            return Err(BootError::DeviceInitializationFailed);
        }
        
        // Send byte via UART
        Ok(())
    }

    /// Receive a byte
    pub fn receive_byte(&mut self) -> Result<u8, BootError> {
        if !self.initialized {
            return Err(BootError::DeviceInitializationFailed);
        }
        
        // Receive byte via UART
        Ok(0)
    }
}

impl PeripheralDevice for TimerDevice {
    fn init(&mut self) -> Result<(), BootError> {
        debug!("Initializing Timer at 0x{:x}, {} Hz", self.base_address, self.frequency);
        
        // Initialize timer
        self.enabled = true;
        self.initialized = true;
        Ok(())
    }

    fn peripheral_type(&self) -> PeripheralType {
        PeripheralType::Timer
    }

    fn name(&self) -> &'static str {
        "Timer"
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn read_status(&self) -> Result<DeviceStatus, BootError> {
        Ok(DeviceStatus {
            initialized: self.initialized,
            enabled: self.enabled,
            error_count: 0,
            last_error: None,
            power_state: if self.enabled { PowerState::On } else { PowerState::Standby },
            performance_metrics: PerformanceMetrics::default(),
        })
    }

    fn configure(&mut self, config: &DeviceConfig) -> Result<(), BootError> {
        self.enabled = !config.power_save;
        Ok(())
    }
}

impl TimerDevice {
    /// Create new timer device
    pub const fn new(base_address: u64, frequency: u64) -> Self {
        Self {
            base_address,
            frequency,
            enabled: false,
            initialized: false,
        }
    }

    /// Get current time
    pub fn get_time(&self) -> Result<u64, BootError> {
        if !self.initialized {
            return Err(BootError::DeviceInitializationFailed);
        }
        
        // Read current time from timer
        Ok(0)
    }

    /// Set timer
    pub fn set_timer(&mut self, duration_ns: u64) -> Result<(), BootError> {
        if !self.initialized {
            return Err(BootError::DeviceInitializationFailed);
        }
        
        // Set timer interrupt
        Ok(())
    }
}