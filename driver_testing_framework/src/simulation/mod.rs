//! Hardware Simulation Module
//!
//! This module provides comprehensive hardware simulation capabilities for testing
//! device drivers without requiring physical hardware. It includes support for
//! various hardware types including PCI devices, serial ports, timers, keyboard,
//! and other peripherals.

use crate::core::*;
use hashbrown::HashMap;
use spin::Mutex;
use serde::{Deserialize, Serialize};

/// Hardware simulator for driver testing
pub struct HardwareSimulator {
    /// Simulation environment configuration
    config: SimulationEnvironment,
    
    /// Simulated devices
    devices: HashMap<String, SimulatedDevice>,
    
    /// Bus simulators
    buses: HashMap<String, Box<dyn BusSimulator>>,
    
    /// Interrupt controller simulation
    interrupt_controller: InterruptControllerSim,
    
    /// Memory controller simulation
    memory_controller: MemoryControllerSim,
    
    /// Simulation time management
    time_manager: TimeManager,
    
    /// Current simulation state
    state: SimulationState,
}

impl HardwareSimulator {
    /// Create a new hardware simulator
    pub fn new(config: SimulationEnvironment) -> Self {
        Self {
            config,
            devices: HashMap::new(),
            buses: HashMap::new(),
            interrupt_controller: InterruptControllerSim::new(),
            memory_controller: MemoryControllerSim::new(),
            time_manager: TimeManager::new(config.timing_multiplier),
            state: SimulationState::Uninitialized,
        }
    }
    
    /// Initialize the simulation environment
    pub fn initialize(&mut self) -> Result<(), DriverTestError> {
        log::info!("Initializing hardware simulation environment");
        
        self.state = SimulationState::Initializing;
        
        // Initialize time management
        self.time_manager.initialize()?;
        
        // Initialize bus simulators
        self.initialize_buses()?;
        
        // Initialize memory controller
        self.memory_controller.initialize()?;
        
        // Initialize interrupt controller
        self.interrupt_controller.initialize()?;
        
        // Create simulated devices
        self.create_simulated_devices()?;
        
        self.state = SimulationState::Ready;
        log::info!("Hardware simulation environment initialized successfully");
        
        Ok(())
    }
    
    /// Initialize simulated buses
    fn initialize_buses(&mut self) -> Result<(), DriverTestError> {
        // PCI Bus Simulator
        let pci_simulator = PciBusSimulator::new();
        self.buses.insert("pci".to_string(), Box::new(pci_simulator));
        
        // USB Bus Simulator
        let usb_simulator = UsbBusSimulator::new();
        self.buses.insert("usb".to_string(), Box::new(usb_simulator));
        
        // Serial Bus Simulator (for PS/2 devices)
        let serial_simulator = SerialBusSimulator::new();
        self.buses.insert("serial".to_string(), Box::new(serial_simulator));
        
        // Platform Bus Simulator (for memory-mapped devices)
        let platform_simulator = PlatformBusSimulator::new();
        self.buses.insert("platform".to_string(), Box::new(platform_simulator));
        
        Ok(())
    }
    
    /// Create simulated devices based on configuration
    fn create_simulated_devices(&mut self) -> Result<(), DriverTestError> {
        // Create simulated UART (serial port)
        if self.config.virtual_hardware {
            self.create_uart_device()?;
            self.create_timer_device()?;
            self.create_keyboard_device()?;
            self.create_pci_device()?;
        }
        
        Ok(())
    }
    
    /// Create simulated UART device
    fn create_uart_device(&mut self) -> Result<(), DriverTestError> {
        let device = SimulatedDevice::Uart(UartDeviceSim::new());
        self.devices.insert("uart0".to_string(), device);
        Ok(())
    }
    
    /// Create simulated timer device
    fn create_timer_device(&mut self) -> Result<(), DriverTestError> {
        let device = SimulatedDevice::Timer(TimerDeviceSim::new());
        self.devices.insert("pit".to_string(), device);
        Ok(())
    }
    
    /// Create simulated keyboard device
    fn create_keyboard_device(&mut self) -> Result<(), DriverTestError> {
        let device = SimulatedDevice::Keyboard(KeyboardDeviceSim::new());
        self.devices.insert("keyboard0".to_string(), device);
        Ok(())
    }
    
    /// Create simulated PCI device
    fn create_pci_device(&mut self) -> Result<(), DriverTestError> {
        let device = SimulatedDevice::Pci(PciDeviceSim::new());
        self.devices.insert("pci_device".to_string(), device);
        Ok(())
    }
    
    /// Get a simulated device
    pub fn get_device(&self, device_name: &str) -> Option<&SimulatedDevice> {
        self.devices.get(device_name)
    }
    
    /// Get a simulated device mutably
    pub fn get_device_mut(&mut self, device_name: &str) -> Option<&mut SimulatedDevice> {
        self.devices.get_mut(device_name)
    }
    
    /// Get the interrupt controller simulator
    pub fn interrupt_controller(&self) -> &InterruptControllerSim {
        &self.interrupt_controller
    }
    
    /// Get the interrupt controller simulator mutably
    pub fn interrupt_controller_mut(&mut self) -> &mut InterruptControllerSim {
        &mut self.interrupt_controller
    }
    
    /// Get the memory controller simulator
    pub fn memory_controller(&self) -> &MemoryControllerSim {
        &self.memory_controller
    }
    
    /// Get the memory controller simulator mutably
    pub fn memory_controller_mut(&mut self) -> &mut MemoryControllerSim {
        &mut self.memory_controller
    }
    
    /// Get the time manager
    pub fn time_manager(&self) -> &TimeManager {
        &self.time_manager
    }
    
    /// Get the time manager mutably
    pub fn time_manager_mut(&mut self) -> &mut TimeManager {
        &mut self.time_manager
    }
    
    /// Get simulation statistics
    pub fn get_statistics(&self) -> SimulationStatistics {
        SimulationStatistics {
            device_count: self.devices.len(),
            bus_count: self.buses.len(),
            simulation_state: self.state,
            time_elapsed: self.time_manager.elapsed_time(),
            interrupt_count: self.interrupt_controller.total_interrupts(),
            memory_access_count: self.memory_controller.total_accesses(),
        }
    }
    
    /// Simulate an interrupt
    pub fn simulate_interrupt(&mut self, irq: u8) -> Result<(), DriverTestError> {
        self.interrupt_controller.generate_interrupt(irq)
    }
    
    /// Simulate device interaction
    pub fn simulate_device_interaction(&mut self, device_name: &str, interaction: DeviceInteraction) 
        -> Result<(), DriverTestError> {
        if let Some(device) = self.devices.get_mut(device_name) {
            device.simulate_interaction(interaction)
        } else {
            Err(DriverTestError::HardwareSimulationError(
                format!("Device '{}' not found", device_name)
            ))
        }
    }
    
    /// Run simulation step
    pub fn step(&mut self) -> Result<(), DriverTestError> {
        self.time_manager.advance_time(Duration::from_millis(1));
        
        // Process interrupts
        self.interrupt_controller.process_pending_interrupts()?;
        
        // Update devices
        for device in self.devices.values_mut() {
            device.update()?;
        }
        
        Ok(())
    }
    
    /// Shutdown simulation
    pub fn shutdown(&mut self) -> Result<(), DriverTestError> {
        log::info!("Shutting down hardware simulation environment");
        
        self.state = SimulationState::ShuttingDown;
        
        // Cleanup all devices
        for device in self.devices.values_mut() {
            device.cleanup()?;
        }
        
        // Shutdown bus simulators
        for bus in self.buses.values_mut() {
            bus.shutdown()?;
        }
        
        self.state = SimulationState::Shutdown;
        log::info!("Hardware simulation environment shutdown complete");
        
        Ok(())
    }
}

impl Drop for HardwareSimulator {
    fn drop(&mut self) {
        if self.state != SimulationState::Shutdown {
            let _ = self.shutdown();
        }
    }
}

/// Simulated device enumeration
#[derive(Debug, Clone)]
pub enum SimulatedDevice {
    /// UART (Serial Port) device
    Uart(UartDeviceSim),
    /// Timer device
    Timer(TimerDeviceSim),
    /// Keyboard device
    Keyboard(KeyboardDeviceSim),
    /// PCI device
    Pci(PciDeviceSim),
    /// Custom device
    Custom(String, Box<dyn DeviceSimulator>),
}

impl SimulatedDevice {
    /// Simulate device interaction
    pub fn simulate_interaction(&mut self, interaction: DeviceInteraction) 
        -> Result<(), DriverTestError> {
        match self {
            SimulatedDevice::Uart(device) => device.simulate_interaction(interaction),
            SimulatedDevice::Timer(device) => device.simulate_interaction(interaction),
            SimulatedDevice::Keyboard(device) => device.simulate_interaction(interaction),
            SimulatedDevice::Pci(device) => device.simulate_interaction(interaction),
            SimulatedDevice::Custom(_, device) => device.simulate_interaction(interaction),
        }
    }
    
    /// Update device state
    pub fn update(&mut self) -> Result<(), DriverTestError> {
        match self {
            SimulatedDevice::Uart(device) => device.update(),
            SimulatedDevice::Timer(device) => device.update(),
            SimulatedDevice::Keyboard(device) => device.update(),
            SimulatedDevice::Pci(device) => device.update(),
            SimulatedDevice::Custom(_, device) => device.update(),
        }
    }
    
    /// Cleanup device
    pub fn cleanup(&mut self) -> Result<(), DriverTestError> {
        match self {
            SimulatedDevice::Uart(device) => device.cleanup(),
            SimulatedDevice::Timer(device) => device.cleanup(),
            SimulatedDevice::Keyboard(device) => device.cleanup(),
            SimulatedDevice::Pci(device) => device.cleanup(),
            SimulatedDevice::Custom(_, device) => device.cleanup(),
        }
    }
}

/// Device interaction types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DeviceInteraction {
    /// Read operation
    Read { address: u64, size: u32 },
    /// Write operation
    Write { address: u64, data: Vec<u8> },
    /// Command execution
    Command { command: String, parameters: Vec<u8> },
    /// Interrupt generation
    Interrupt { irq: u8 },
    /// Reset operation
    Reset,
}

/// Device simulator trait
pub trait DeviceSimulator {
    /// Simulate device interaction
    fn simulate_interaction(&mut self, interaction: DeviceInteraction) 
        -> Result<(), DriverTestError>;
    
    /// Update device state
    fn update(&mut self) -> Result<(), DriverTestError>;
    
    /// Cleanup device resources
    fn cleanup(&mut self) -> Result<(), DriverTestError>;
}

/// UART device simulator
pub struct UartDeviceSim {
    /// UART configuration
    config: UartConfig,
    /// Internal data buffer
    buffer: Vec<u8>,
    /// Interrupt status
    interrupt_status: u8,
}

impl UartDeviceSim {
    /// Create a new UART simulator
    pub fn new() -> Self {
        Self {
            config: UartConfig {
                baud_rate: 115200,
                data_bits: 8,
                stop_bits: 1,
                parity: UartParity::None,
                flow_control: UartFlowControl::None,
            },
            buffer: Vec::new(),
            interrupt_status: 0,
        }
    }
}

impl DeviceSimulator for UartDeviceSim {
    fn simulate_interaction(&mut self, interaction: DeviceInteraction) 
        -> Result<(), DriverTestError> {
        match interaction {
            DeviceInteraction::Write { address, data } => {
                self.buffer.extend_from_slice(&data);
                self.interrupt_status |= 0x20; // Set transmit empty interrupt
            },
            DeviceInteraction::Read { address: _, size } => {
                // Simulate data availability
                if !self.buffer.is_empty() {
                    self.interrupt_status |= 0x04; // Set data available interrupt
                }
            },
            DeviceInteraction::Command { command, parameters: _ } => {
                match command.as_str() {
                    "reset" => {
                        self.buffer.clear();
                        self.interrupt_status = 0;
                    },
                    "configure" => {
                        // Update configuration
                    },
                    _ => return Err(DriverTestError::HardwareSimulationError(
                        format!("Unknown UART command: {}", command)
                    )),
                }
            },
            DeviceInteraction::Interrupt { irq: _ } => {
                // Handle interrupt simulation
            },
            DeviceInteraction::Reset => {
                self.buffer.clear();
                self.interrupt_status = 0;
            },
        }
        Ok(())
    }
    
    fn update(&mut self) -> Result<(), DriverTestError> {
        // Simulate device updates
        Ok(())
    }
    
    fn cleanup(&mut self) -> Result<(), DriverTestError> {
        self.buffer.clear();
        Ok(())
    }
}

/// Timer device simulator
pub struct TimerDeviceSim {
    /// Timer configuration
    config: TimerConfig,
    /// Timer counters
    counters: Vec<u32>,
    /// Interrupt status
    interrupt_status: u8,
}

impl TimerDeviceSim {
    /// Create a new timer simulator
    pub fn new() -> Self {
        Self {
            config: TimerConfig {
                frequency: 1193182, // PIT frequency
                mode: TimerMode::RateGenerator,
            },
            counters: vec![0; 3], // 3 channels
            interrupt_status: 0,
        }
    }
}

impl DeviceSimulator for TimerDeviceSim {
    fn simulate_interaction(&mut self, interaction: DeviceInteraction) 
        -> Result<(), DriverTestError> {
        match interaction {
            DeviceInteraction::Write { address, data } => {
                if let Ok(channel) = (address & 0x3) as usize {
                    if channel < self.counters.len() {
                        // Write timer value
                        let value = u32::from_le_bytes([data[0], data[1], 0, 0]);
                        self.counters[channel] = value;
                    }
                }
            },
            DeviceInteraction::Read { address: _, size: _ } => {
                // Simulate read operation
            },
            DeviceInteraction::Command { command, parameters: _ } => {
                match command.as_str() {
                    "reset" => {
                        for counter in &mut self.counters {
                            *counter = 0;
                        }
                    },
                    _ => return Err(DriverTestError::HardwareSimulationError(
                        format!("Unknown timer command: {}", command)
                    )),
                }
            },
            DeviceInteraction::Interrupt { irq: _ } => {
                // Handle interrupt
            },
            DeviceInteraction::Reset => {
                for counter in &mut self.counters {
                    *counter = 0;
                }
            },
        }
        Ok(())
    }
    
    fn update(&mut self) -> Result<(), DriverTestError> {
        // Simulate timer counting
        for counter in &mut self.counters {
            *counter = counter.wrapping_add(1);
        }
        Ok(())
    }
    
    fn cleanup(&mut self) -> Result<(), DriverTestError> {
        for counter in &mut self.counters {
            *counter = 0;
        }
        Ok(())
    }
}

/// Keyboard device simulator
pub struct KeyboardDeviceSim {
    /// Keyboard state
    state: KeyboardState,
    /// Key buffer
    key_buffer: Vec<u8>,
    /// Interrupt status
    interrupt_status: u8,
}

impl KeyboardDeviceSim {
    /// Create a new keyboard simulator
    pub fn new() -> Self {
        Self {
            state: KeyboardState::default(),
            key_buffer: Vec::new(),
            interrupt_status: 0,
        }
    }
}

impl DeviceSimulator for KeyboardDeviceSim {
    fn simulate_interaction(&mut self, interaction: DeviceInteraction) 
        -> Result<(), DriverTestError> {
        match interaction {
            DeviceInteraction::Write { data, .. } => {
                if !data.is_empty() {
                    self.key_buffer.push(data[0]);
                    self.interrupt_status |= 0x01; // Set keyboard interrupt
                }
            },
            DeviceInteraction::Read { .. } => {
                // Read would consume data from buffer
            },
            DeviceInteraction::Command { command, parameters } => {
                match command.as_str() {
                    "reset" => {
                        self.state = KeyboardState::default();
                        self.key_buffer.clear();
                    },
                    "send_key" => {
                        if !parameters.is_empty() {
                            self.key_buffer.push(parameters[0]);
                        }
                    },
                    _ => return Err(DriverTestError::HardwareSimulationError(
                        format!("Unknown keyboard command: {}", command)
                    )),
                }
            },
            DeviceInteraction::Interrupt { irq: _ } => {
                // Handle interrupt
            },
            DeviceInteraction::Reset => {
                self.state = KeyboardState::default();
                self.key_buffer.clear();
            },
        }
        Ok(())
    }
    
    fn update(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
    
    fn cleanup(&mut self) -> Result<(), DriverTestError> {
        self.key_buffer.clear();
        Ok(())
    }
}

/// PCI device simulator
pub struct PciDeviceSim {
    /// PCI configuration
    config: PciConfig,
    /// Device state
    state: PciDeviceState,
}

impl PciDeviceSim {
    /// Create a new PCI device simulator
    pub fn new() -> Self {
        Self {
            config: PciConfig {
                vendor_id: 0x1234,
                device_id: 0x5678,
                class_code: 0x030000, // VGA controller
            },
            state: PciDeviceState::default(),
        }
    }
}

impl DeviceSimulator for PciDeviceSim {
    fn simulate_interaction(&mut self, interaction: DeviceInteraction) 
        -> Result<(), DriverTestError> {
        match interaction {
            DeviceInteraction::Write { address, data } => {
                // Handle PCI configuration space access
            },
            DeviceInteraction::Read { address, size } => {
                // Handle PCI configuration space read
            },
            DeviceInteraction::Command { command, parameters: _ } => {
                match command.as_str() {
                    "reset" => {
                        self.state = PciDeviceState::default();
                    },
                    _ => return Err(DriverTestError::HardwareSimulationError(
                        format!("Unknown PCI command: {}", command)
                    )),
                }
            },
            DeviceInteraction::Interrupt { irq } => {
                // Handle interrupt
            },
            DeviceInteraction::Reset => {
                self.state = PciDeviceState::default();
            },
        }
        Ok(())
    }
    
    fn update(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
    
    fn cleanup(&mut self) -> Result<(), DriverTestError> {
        self.state = PciDeviceState::default();
        Ok(())
    }
}

// Supporting types and implementations

/// UART configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UartConfig {
    pub baud_rate: u32,
    pub data_bits: u8,
    pub stop_bits: u8,
    pub parity: UartParity,
    pub flow_control: UartFlowControl,
}

/// UART parity types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UartParity {
    None,
    Even,
    Odd,
}

/// UART flow control types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UartFlowControl {
    None,
    RtsCts,
    XonXoff,
}

/// Timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    pub frequency: u32,
    pub mode: TimerMode,
}

/// Timer modes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TimerMode {
    RateGenerator,
    SquareWave,
    SoftwareTriggered,
    HardwareTriggered,
}

/// Keyboard state
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub caps_lock: bool,
    pub num_lock: bool,
    pub scroll_lock: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// PCI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PciConfig {
    pub vendor_id: u16,
    pub device_id: u16,
    pub class_code: u32,
}

/// PCI device state
#[derive(Debug, Clone, Default)]
pub struct PciDeviceState {
    pub command_register: u16,
    pub status_register: u16,
    pub interrupt_line: u8,
}

/// Bus simulator trait
pub trait BusSimulator {
    /// Initialize the bus simulator
    fn initialize(&mut self) -> Result<(), DriverTestError>;
    
    /// Scan for devices on the bus
    fn scan_devices(&self) -> Result<Vec<String>, DriverTestError>;
    
    /// Shutdown the bus simulator
    fn shutdown(&mut self) -> Result<(), DriverTestError>;
}

/// PCI bus simulator
pub struct PciBusSimulator;

impl PciBusSimulator {
    pub fn new() -> Self {
        Self
    }
}

impl BusSimulator for PciBusSimulator {
    fn initialize(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
    
    fn scan_devices(&self) -> Result<Vec<String>, DriverTestError> {
        Ok(vec!["0000:00:00.0".to_string()])
    }
    
    fn shutdown(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
}

/// USB bus simulator
pub struct UsbBusSimulator;

impl UsbBusSimulator {
    pub fn new() -> Self {
        Self
    }
}

impl BusSimulator for UsbBusSimulator {
    fn initialize(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
    
    fn scan_devices(&self) -> Result<Vec<String>, DriverTestError> {
        Ok(vec!["usb1".to_string()])
    }
    
    fn shutdown(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
}

/// Serial bus simulator
pub struct SerialBusSimulator;

impl SerialBusSimulator {
    pub fn new() -> Self {
        Self
    }
}

impl BusSimulator for SerialBusSimulator {
    fn initialize(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
    
    fn scan_devices(&self) -> Result<Vec<String>, DriverTestError> {
        Ok(vec!["com1".to_string()])
    }
    
    fn shutdown(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
}

/// Platform bus simulator
pub struct PlatformBusSimulator;

impl PlatformBusSimulator {
    pub fn new() -> Self {
        Self
    }
}

impl BusSimulator for PlatformBusSimulator {
    fn initialize(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
    
    fn scan_devices(&self) -> Result<Vec<String>, DriverTestError> {
        Ok(vec!["platform_device".to_string()])
    }
    
    fn shutdown(&mut self) -> Result<(), DriverTestError> {
        Ok(())
    }
}

/// Interrupt controller simulator
pub struct InterruptControllerSim {
    /// Interrupt vectors
    vectors: [Option<InterruptVector>; 256],
    /// Pending interrupts
    pending_interrupts: Vec<u8>,
    /// Total interrupt count
    total_interrupts: u64,
}

impl InterruptControllerSim {
    /// Create a new interrupt controller simulator
    pub fn new() -> Self {
        Self {
            vectors: [None; 256],
            pending_interrupts: Vec::new(),
            total_interrupts: 0,
        }
    }
    
    /// Initialize the interrupt controller
    pub fn initialize(&mut self) -> Result<(), DriverTestError> {
        self.pending_interrupts.clear();
        self.total_interrupts = 0;
        Ok(())
    }
    
    /// Generate an interrupt
    pub fn generate_interrupt(&mut self, irq: u8) -> Result<(), DriverTestError> {
        if !self.pending_interrupts.contains(&irq) {
            self.pending_interrupts.push(irq);
            self.total_interrupts += 1;
        }
        Ok(())
    }
    
    /// Process pending interrupts
    pub fn process_pending_interrupts(&mut self) -> Result<(), DriverTestError> {
        // Process all pending interrupts
        self.pending_interrupts.clear();
        Ok(())
    }
    
    /// Get total interrupt count
    pub fn total_interrupts(&self) -> u64 {
        self.total_interrupts
    }
}

/// Memory controller simulator
pub struct MemoryControllerSim {
    /// Memory regions
    regions: HashMap<u64, MemoryRegion>,
    /// Total access count
    total_accesses: u64,
}

impl MemoryControllerSim {
    /// Create a new memory controller simulator
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
            total_accesses: 0,
        }
    }
    
    /// Initialize the memory controller
    pub fn initialize(&mut self) -> Result<(), DriverTestError> {
        self.regions.clear();
        self.total_accesses = 0;
        
        // Create default memory regions
        let ram_region = MemoryRegion {
            base_address: 0x00000000,
            size: 0x40000000, // 1GB
            access_type: MemoryAccessType::ReadWrite,
        };
        self.regions.insert(0x00000000, ram_region);
        
        Ok(())
    }
    
    /// Get total access count
    pub fn total_accesses(&self) -> u64 {
        self.total_accesses
    }
    
    /// Increment access count
    pub fn increment_access_count(&mut self) {
        self.total_accesses += 1;
    }
}

/// Time manager for simulation
pub struct TimeManager {
    /// Simulation start time
    start_time: core::time::Duration,
    /// Current simulation time
    current_time: core::time::Duration,
    /// Timing multiplier
    timing_multiplier: f64,
}

impl TimeManager {
    /// Create a new time manager
    pub fn new(timing_multiplier: f64) -> Self {
        Self {
            start_time: core::time::Duration::from_secs(0),
            current_time: core::time::Duration::from_secs(0),
            timing_multiplier,
        }
    }
    
    /// Initialize the time manager
    pub fn initialize(&mut self) -> Result<(), DriverTestError> {
        self.current_time = core::time::Duration::from_secs(0);
        Ok(())
    }
    
    /// Advance simulation time
    pub fn advance_time(&mut self, duration: core::time::Duration) {
        let adjusted_duration = core::time::Duration::from_secs_f64(
            duration.as_secs_f64() * self.timing_multiplier
        );
        self.current_time += adjusted_duration;
    }
    
    /// Get elapsed time
    pub fn elapsed_time(&self) -> core::time::Duration {
        self.current_time
    }
    
    /// Get current simulation time
    pub fn current_time(&self) -> core::time::Duration {
        self.current_time
    }
    
    /// Get timing multiplier
    pub fn timing_multiplier(&self) -> f64 {
        self.timing_multiplier
    }
}

/// Simulation state enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationState {
    Uninitialized,
    Initializing,
    Ready,
    Running,
    Paused,
    ShuttingDown,
    Shutdown,
    Error(String),
}

/// Memory region structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRegion {
    /// Base address
    pub base_address: u64,
    /// Size in bytes
    pub size: u64,
    /// Access type
    pub access_type: MemoryAccessType,
}

/// Memory access types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MemoryAccessType {
    ReadOnly,
    WriteOnly,
    ReadWrite,
    NoAccess,
}

/// Interrupt vector structure
#[derive(Debug, Clone)]
pub struct InterruptVector {
    pub irq: u8,
    pub handler: Box<dyn Fn() -> Result<(), DriverTestError>>,
    pub enabled: bool,
}

/// Simulation statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationStatistics {
    pub device_count: usize,
    pub bus_count: usize,
    pub simulation_state: SimulationState,
    pub time_elapsed: core::time::Duration,
    pub interrupt_count: u64,
    pub memory_access_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_hardware_simulator_creation() {
        let config = SimulationEnvironment::default();
        let simulator = HardwareSimulator::new(config);
        assert_eq!(simulator.state, SimulationState::Uninitialized);
    }
    
    #[test]
    fn test_uart_device_simulation() {
        let mut device = UartDeviceSim::new();
        let interaction = DeviceInteraction::Write {
            address: 0x3f8,
            data: vec![0x41], // 'A'
        };
        
        let result = device.simulate_interaction(interaction);
        assert!(result.is_ok());
    }
    
    #[test]
    fn test_interrupt_controller() {
        let mut controller = InterruptControllerSim::new();
        controller.initialize().unwrap();
        
        controller.generate_interrupt(1).unwrap();
        assert_eq!(controller.total_interrupts(), 1);
        
        controller.generate_interrupt(2).unwrap();
        assert_eq!(controller.total_interrupts(), 2);
    }
    
    #[test]
    fn test_time_manager() {
        let mut time_manager = TimeManager::new(2.0);
        time_manager.initialize().unwrap();
        
        assert_eq!(time_manager.current_time(), core::time::Duration::from_secs(0));
        
        time_manager.advance_time(core::time::Duration::from_secs(1));
        assert_eq!(time_manager.current_time(), core::time::Duration::from_secs(2));
    }
}
