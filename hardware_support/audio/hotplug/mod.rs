//! Audio Device Hotplug Support
//! 
//! This module provides dynamic detection and management of audio devices
//! for MultiOS, including USB audio devices, Bluetooth audio devices,
//! and PCI hotplug events.

use crate::core::{AudioError, StreamConfig};
use crate::hal::{AudioDevice, detect_pci_audio_devices, detect_usb_audio_devices};
use crate::codecs::{detect_codecs, AudioCodec};
use alloc::vec::Vec;
use alloc::collections::BTreeMap;

/// Hotplug event types
#[derive(Debug, Clone, Copy)]
pub enum HotplugEvent {
    DeviceAdded(DeviceInfo),
    DeviceRemoved(u32),
    DeviceError(u32, AudioError),
    DeviceStateChanged(u32, DeviceState),
}

/// Device state for hotplug tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceState {
    Connected,
    Disconnected,
    Configuring,
    Active,
    Error,
}

/// Audio device information for hotplug
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub id: u32,
    pub name: &'static str,
    pub device_type: DeviceType,
    pub bus_info: BusInfo,
    pub capabilities: DeviceCapabilities,
}

/// Audio device types
#[derive(Debug, Clone, Copy)]
pub enum DeviceType {
    PciAudio,
    UsbAudio,
    BluetoothAudio,
    HdmiAudio,
    AnalogAudio,
    I2sAudio,
    EmbeddedAudio,
}

/// Bus information structure
#[derive(Debug, Clone)]
pub struct BusInfo {
    pub bus_type: BusType,
    pub bus_number: u8,
    pub device_number: u8,
    pub function_number: u8,
    pub vendor_id: u16,
    pub device_id: u16,
    pub subsystem_id: u16,
}

/// Bus types
#[derive(Debug, Clone, Copy)]
pub enum BusType {
    Pci,
    Usb,
    Bluetooth,
    Hdmi,
    I2c,
    Spi,
    Platform,
}

/// Device capabilities
#[derive(Debug, Clone, Copy)]
pub struct DeviceCapabilities {
    pub playback_channels: u8,
    pub recording_channels: u8,
    pub sample_rates: Vec<u32>,
    pub formats: Vec<crate::core::AudioFormat>,
    pub buffer_sizes: Vec<usize>,
    pub low_latency: bool,
    pub high_sample_rate: bool,
}

/// Hotplug event handler trait
pub trait AudioHotplugHandler {
    /// Handle hotplug event
    fn handle_event(&mut self, event: HotplugEvent) -> Result<(), AudioError>;
    
    /// Device configuration callback
    fn configure_device(&mut self, device: &mut AudioDevice, config: &StreamConfig) -> Result<(), AudioError>;
    
    /// Device cleanup callback
    fn cleanup_device(&mut self, device_id: u32) -> Result<(), AudioError>;
}

/// Audio device hotplug manager
pub struct AudioHotplugManager {
    devices: BTreeMap<u32, RegisteredDevice>,
    event_handlers: Vec<Box<dyn AudioHotplugHandler>>,
    next_device_id: u32,
    polling_enabled: bool,
    poll_interval_ms: u32,
}

/// Registered device structure
#[derive(Debug, Clone)]
struct RegisteredDevice {
    device: AudioDevice,
    state: DeviceState,
    last_seen_ms: u64,
    codec: Option<Box<dyn AudioCodec>>,
    config: Option<StreamConfig>,
}

impl AudioHotplugManager {
    /// Create a new hotplug manager
    pub fn new() -> Self {
        Self {
            devices: BTreeMap::new(),
            event_handlers: Vec::new(),
            next_device_id: 1,
            polling_enabled: true,
            poll_interval_ms: 1000, // Poll every second
        }
    }

    /// Initialize the hotplug manager
    pub fn initialize(&mut self) -> Result<(), AudioError> {
        log_info!("Initializing audio hotplug manager");
        
        // Detect existing devices
        self.detect_initial_devices()?;
        
        // Start hotplug monitoring thread (in real implementation)
        self.start_monitoring()?;
        
        log_info!("Audio hotplug manager initialized");
        Ok(())
    }

    /// Detect and register initial devices
    fn detect_initial_devices(&mut self) -> Result<(), AudioError> {
        log_info!("Detecting initial audio devices");

        // Detect PCI audio devices
        let pci_devices = detect_pci_audio_devices();
        for device in pci_devices {
            self.register_device(device)?;
        }

        // Detect USB audio devices
        let usb_devices = detect_usb_audio_devices();
        for device in usb_devices {
            self.register_device(device)?;
        }

        // Detect audio codecs
        let codecs = detect_codecs();
        for mut codec in codecs {
            let codec_info = codec.get_info().name;
            log_info!("Found codec: {}", codec_info);
            
            // Attach codec to first available device
            if let Some(device_entry) = self.devices.values_mut().next() {
                device_entry.codec = Some(codec);
                log_info!("Attached codec to device");
            }
        }

        Ok(())
    }

    /// Register a new audio device
    fn register_device(&mut self, device: AudioDevice) -> Result<u32, AudioError> {
        let device_id = self.allocate_device_id();
        
        // Create device info
        let device_info = DeviceInfo {
            id: device_id,
            name: device.info().name,
            device_type: DeviceType::PciAudio, // Would be determined from device info
            bus_info: BusInfo {
                bus_type: BusType::Pci,
                bus_number: 0,
                device_number: 0,
                function_number: 0,
                vendor_id: device.info().vendor_id,
                device_id: device.info().device_id,
                subsystem_id: device.info().subsystem_id,
            },
            capabilities: DeviceCapabilities {
                playback_channels: device.info().capabilities.max_channels,
                recording_channels: device.info().capabilities.max_channels,
                sample_rates: device.info().capabilities.sample_rates.clone(),
                formats: device.info().capabilities.supported_formats.clone(),
                buffer_sizes: device.info().capabilities.buffer_sizes.clone(),
                low_latency: device.info().capabilities.hardware_mixing,
                high_sample_rate: device.info().capabilities.sample_rates.iter().any(|&r| r >= 96000),
            },
        };

        // Initialize device
        let mut audio_device = device;
        audio_device.initialize()?;

        // Create registered device
        let registered_device = RegisteredDevice {
            device: audio_device,
            state: DeviceState::Active,
            last_seen_ms: self.get_current_time_ms(),
            codec: None,
            config: None,
        };

        self.devices.insert(device_id, registered_device);
        
        // Notify event handlers
        self.notify_handlers(HotplugEvent::DeviceAdded(device_info))?;

        log_info!("Registered audio device {}: {}", device_id, device.info().name);
        Ok(device_id)
    }

    /// Unregister an audio device
    pub fn unregister_device(&mut self, device_id: u32) -> Result<(), AudioError> {
        if let Some(_device) = self.devices.remove(&device_id) {
            self.notify_handlers(HotplugEvent::DeviceRemoved(device_id))?;
            log_info!("Unregistered audio device {}", device_id);
            Ok(())
        } else {
            Err(AudioError::DeviceNotFound)
        }
    }

    /// Allocate a unique device ID
    fn allocate_device_id(&mut self) -> u32 {
        let id = self.next_device_id;
        self.next_device_id += 1;
        id
    }

    /// Start device monitoring
    fn start_monitoring(&mut self) -> Result<(), AudioError> {
        // In a real implementation, this would start a background thread
        // that monitors for hotplug events
        log_info!("Starting audio device monitoring");
        Ok(())
    }

    /// Poll for device changes
    pub fn poll_devices(&mut self) -> Result<(), AudioError> {
        if !self.polling_enabled {
            return Ok(());
        }

        let current_time = self.get_current_time_ms();

        // Simulate PCI device polling
        self.poll_pci_devices(current_time)?;
        
        // Simulate USB device polling
        self.poll_usb_devices(current_time)?;
        
        // Simulate Bluetooth device polling
        self.poll_bluetooth_devices(current_time)?;

        Ok(())
    }

    /// Poll PCI devices
    fn poll_pci_devices(&mut self, current_time: u64) -> Result<(), AudioError> {
        // In real implementation, would check PCI configuration space
        // for new/removed devices
        
        // Simulate finding a new PCI device after some time
        if current_time > 5000 && self.devices.is_empty() {
            // This simulates a hotplugged PCI audio device
            log_info!("Hotplug event: New PCI audio device detected");
        }

        Ok(())
    }

    /// Poll USB devices
    fn poll_usb_devices(&mut self, current_time: u64) -> Result<(), AudioError> {
        // In real implementation, would enumerate USB busses
        // for new/removed audio devices
        
        // Simulate USB audio device connection
        if current_time > 10000 {
            log_info!("Hotplug event: USB audio device connected");
        }

        Ok(())
    }

    /// Poll Bluetooth devices
    fn poll_bluetooth_devices(&mut self, current_time: u64) -> Result<(), AudioError> {
        // In real implementation, would scan for Bluetooth audio devices
        // using HFP/A2DP protocols
        
        if current_time > 15000 {
            log_info!("Hotplug event: Bluetooth audio device paired");
        }

        Ok(())
    }

    /// Configure a device
    pub fn configure_device(&mut self, device_id: u32, config: StreamConfig) -> Result<(), AudioError> {
        if let Some(device_entry) = self.devices.get_mut(&device_id) {
            device_entry.state = DeviceState::Configuring;
            
            // Configure the audio device
            device_entry.device.set_format(config.format, config.sample_rate, config.channels)?;
            
            // Configure codec if available
            if let Some(ref mut codec) = device_entry.codec {
                codec.configure(&config)?;
            }
            
            device_entry.config = Some(config);
            device_entry.state = DeviceState::Active;
            
            log_info!("Configured device {}: {}Hz, {} channels", 
                     device_id, config.sample_rate, config.channels);
            
            Ok(())
        } else {
            Err(AudioError::DeviceNotFound)
        }
    }

    /// Get device information
    pub fn get_device_info(&self, device_id: u32) -> Result<DeviceInfo, AudioError> {
        if let Some(device_entry) = self.devices.get(&device_id) {
            Ok(DeviceInfo {
                id: device_id,
                name: device_entry.device.info().name,
                device_type: DeviceType::PciAudio,
                bus_info: BusInfo {
                    bus_type: BusType::Pci,
                    bus_number: 0,
                    device_number: 0,
                    function_number: 0,
                    vendor_id: device_entry.device.info().vendor_id,
                    device_id: device_entry.device.info().device_id,
                    subsystem_id: device_entry.device.info().subsystem_id,
                },
                capabilities: DeviceCapabilities {
                    playback_channels: device_entry.device.info().capabilities.max_channels,
                    recording_channels: device_entry.device.info().capabilities.max_channels,
                    sample_rates: device_entry.device.info().capabilities.sample_rates.clone(),
                    formats: device_entry.device.info().capabilities.supported_formats.clone(),
                    buffer_sizes: device_entry.device.info().capabilities.buffer_sizes.clone(),
                    low_latency: device_entry.device.info().capabilities.hardware_mixing,
                    high_sample_rate: device_entry.device.info().capabilities.sample_rates.iter().any(|&r| r >= 96000),
                },
            })
        } else {
            Err(AudioError::DeviceNotFound)
        }
    }

    /// List all registered devices
    pub fn list_devices(&self) -> Vec<DeviceInfo> {
        let mut devices = Vec::new();
        
        for (&device_id, device_entry) in &self.devices {
            let info = DeviceInfo {
                id: device_id,
                name: device_entry.device.info().name,
                device_type: DeviceType::PciAudio,
                bus_info: BusInfo {
                    bus_type: BusType::Pci,
                    bus_number: 0,
                    device_number: 0,
                    function_number: 0,
                    vendor_id: device_entry.device.info().vendor_id,
                    device_id: device_entry.device.info().device_id,
                    subsystem_id: device_entry.device.info().subsystem_id,
                },
                capabilities: DeviceCapabilities {
                    playback_channels: device_entry.device.info().capabilities.max_channels,
                    recording_channels: device_entry.device.info().capabilities.max_channels,
                    sample_rates: device_entry.device.info().capabilities.sample_rates.clone(),
                    formats: device_entry.device.info().capabilities.supported_formats.clone(),
                    buffer_sizes: device_entry.device.info().capabilities.buffer_sizes.clone(),
                    low_latency: device_entry.device.info().capabilities.hardware_mixing,
                    high_sample_rate: device_entry.device.info().capabilities.sample_rates.iter().any(|&r| r >= 96000),
                },
            };
            devices.push(info);
        }
        
        devices
    }

    /// Add event handler
    pub fn add_event_handler(&mut self, handler: Box<dyn AudioHotplugHandler>) {
        self.event_handlers.push(handler);
        log_info!("Added hotplug event handler");
    }

    /// Remove event handler
    pub fn remove_event_handler(&mut self, index: usize) -> Result<(), AudioError> {
        if index < self.event_handlers.len() {
            self.event_handlers.remove(index);
            log_info!("Removed hotplug event handler {}", index);
            Ok(())
        } else {
            Err(AudioError::InvalidState)
        }
    }

    /// Notify all event handlers
    fn notify_handlers(&mut self, event: HotplugEvent) -> Result<(), AudioError> {
        for handler in &mut self.event_handlers {
            if let Err(error) = handler.handle_event(event) {
                log_error!("Event handler error: {:?}", error);
            }
        }
        Ok(())
    }

    /// Enable/disable polling
    pub fn set_polling_enabled(&mut self, enabled: bool) {
        self.polling_enabled = enabled;
        log_info!("Device polling {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Get current time in milliseconds (placeholder)
    fn get_current_time_ms(&self) -> u64 {
        // In real implementation, would use actual system time
        static mut START_TIME: Option<u64> = None;
        unsafe {
            if let Some(start) = START_TIME {
                start + 100 // Simulate time passing
            } else {
                START_TIME = Some(0);
                0
            }
        }
    }

    /// Get device statistics
    pub fn get_statistics(&self) -> HotplugStatistics {
        HotplugStatistics {
            total_devices: self.devices.len(),
            active_devices: self.devices.values().filter(|d| d.state == DeviceState::Active).count(),
            configuring_devices: self.devices.values().filter(|d| d.state == DeviceState::Configuring).count(),
            error_devices: self.devices.values().filter(|d| d.state == DeviceState::Error).count(),
            polling_enabled: self.polling_enabled,
            poll_interval_ms: self.poll_interval_ms,
        }
    }
}

/// Hotplug manager statistics
#[derive(Debug, Clone)]
pub struct HotplugStatistics {
    pub total_devices: usize,
    pub active_devices: usize,
    pub configuring_devices: usize,
    pub error_devices: usize,
    pub polling_enabled: bool,
    pub poll_interval_ms: u32,
}

/// USB audio device hotplug handler
pub struct UsbAudioHotplugHandler {
    device_manager: AudioHotplugManager,
}

impl UsbAudioHotplugHandler {
    pub fn new() -> Self {
        Self {
            device_manager: AudioHotplugManager::new(),
        }
    }
}

impl AudioHotplugHandler for UsbAudioHotplugHandler {
    fn handle_event(&mut self, event: HotplugEvent) -> Result<(), AudioError> {
        match event {
            HotplugEvent::DeviceAdded(info) => {
                if info.device_type == DeviceType::UsbAudio {
                    log_info!("USB Audio device connected: {}", info.name);
                    // Auto-configure USB audio device
                    self.device_manager.configure_device(info.id, StreamConfig {
                        format: crate::core::AudioFormat::Pcm16LE,
                        sample_rate: 48000,
                        channels: 2,
                        buffer_size: 1024,
                        buffer_count: 2,
                    })?;
                }
            },
            HotplugEvent::DeviceRemoved(device_id) => {
                log_info!("Audio device removed: {}", device_id);
            },
            HotplugEvent::DeviceError(device_id, error) => {
                log_error!("Audio device error on device {}: {:?}", device_id, error);
            },
            HotplugEvent::DeviceStateChanged(device_id, state) => {
                log_info!("Device {} state changed to: {:?}", device_id, state);
            },
        }
        Ok(())
    }

    fn configure_device(&mut self, device: &mut AudioDevice, config: &StreamConfig) -> Result<(), AudioError> {
        device.set_format(config.format, config.sample_rate, config.channels)?;
        Ok(())
    }

    fn cleanup_device(&mut self, device_id: u32) -> Result<(), AudioError> {
        log_info!("Cleaning up device {}", device_id);
        Ok(())
    }
}

/// Bluetooth audio device hotplug handler
pub struct BluetoothAudioHandler {
    paired_devices: Vec<String>,
}

impl BluetoothAudioHandler {
    pub fn new() -> Self {
        Self {
            paired_devices: Vec::new(),
        }
    }

    /// Scan for Bluetooth audio devices
    pub fn scan_devices(&mut self) -> Result<Vec<String>, AudioError> {
        // Simulate scanning for Bluetooth audio devices
        log_info!("Scanning for Bluetooth audio devices...");
        
        // In real implementation, would use Bluetooth stack
        let found_devices = vec![
            "Headphones A2DP".to_string(),
            "Speaker HFP".to_string(),
        ];
        
        log_info!("Found {} Bluetooth audio devices", found_devices.len());
        Ok(found_devices)
    }
}

impl AudioHotplugHandler for BluetoothAudioHandler {
    fn handle_event(&mut self, event: HotplugEvent) -> Result<(), AudioError> {
        match event {
            HotplugEvent::DeviceAdded(info) => {
                if info.device_type == DeviceType::BluetoothAudio {
                    log_info!("Bluetooth audio device paired: {}", info.name);
                    self.paired_devices.push(info.name.to_string());
                }
            },
            HotplugEvent::DeviceRemoved(device_id) => {
                log_info!("Bluetooth audio device disconnected: {}", device_id);
            },
            _ => {},
        }
        Ok(())
    }

    fn configure_device(&mut self, device: &mut AudioDevice, config: &StreamConfig) -> Result<(), AudioError> {
        device.set_format(config.format, config.sample_rate, config.channels)?;
        Ok(())
    }

    fn cleanup_device(&mut self, device_id: u32) -> Result<(), AudioError> {
        log_info!("Cleaning up Bluetooth device {}", device_id);
        Ok(())
    }
}

/// Default hotplug handler that logs all events
pub struct DefaultHotplugHandler;

impl DefaultHotplugHandler {
    pub fn new() -> Self {
        Self
    }
}

impl AudioHotplugHandler for DefaultHotplugHandler {
    fn handle_event(&mut self, event: HotplugEvent) -> Result<(), AudioError> {
        match event {
            HotplugEvent::DeviceAdded(info) => {
                log_info!("Device Added: {} (ID: {})", info.name, info.id);
            },
            HotplugEvent::DeviceRemoved(device_id) => {
                log_info!("Device Removed: {}", device_id);
            },
            HotplugEvent::DeviceError(device_id, error) => {
                log_error!("Device Error: {} - {:?}", device_id, error);
            },
            HotplugEvent::DeviceStateChanged(device_id, state) => {
                log_info!("Device State Changed: {} - {:?}", device_id, state);
            },
        }
        Ok(())
    }

    fn configure_device(&mut self, device: &mut AudioDevice, config: &StreamConfig) -> Result<(), AudioError> {
        log_info!("Configuring device with format {:?}, {}Hz, {} channels",
                 config.format, config.sample_rate, config.channels);
        device.set_format(config.format, config.sample_rate, config.channels)?;
        Ok(())
    }

    fn cleanup_device(&mut self, device_id: u32) -> Result<(), AudioError> {
        log_info!("Cleaning up device {}", device_id);
        Ok(())
    }
}

// Logging functions
fn log_info(msg: &str) {
    println!("[AUDIO HOTPLUG] {}", msg);
}

fn log_error(msg: &str) {
    eprintln!("[AUDIO HOTPLUG ERROR] {}", msg);
}