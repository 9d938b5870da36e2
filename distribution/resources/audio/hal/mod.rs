//! Audio Hardware Abstraction Layer (HAL)
//! 
//! This module provides low-level hardware interfaces for audio devices,
//! including PCI audio controllers, USB audio devices, and embedded audio codecs.

use alloc::vec::Vec;
use core::ptr::{read_volatile, write_volatile};
use crate::core::{AudioFormat, AudioError};

/// Generic audio device interface
pub trait AudioDeviceInterface {
    /// Initialize the audio device
    fn initialize(&mut self) -> Result<(), AudioError>;
    
    /// Read audio data from device
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, AudioError>;
    
    /// Write audio data to device
    fn write(&mut self, buffer: &[u8]) -> Result<usize, AudioError>;
    
    /// Configure device format
    fn set_format(&mut self, format: AudioFormat, sample_rate: u32, channels: u8) -> Result<(), AudioError>;
    
    /// Get current device state
    fn get_state(&self) -> DeviceState;
    
    /// Check if device is ready
    fn is_ready(&self) -> bool;
}

/// Audio device states
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceState {
    Uninitialized,
    Initialized,
    Playing,
    Recording,
    Paused,
    Error,
}

/// Audio device base information
pub struct AudioDeviceInfo {
    pub name: &'static str,
    pub vendor: &'static str,
    pub device_id: u16,
    pub subsystem_id: u16,
    pub revision: u8,
    pub capabilities: DeviceCapabilities,
}

/// Device capabilities
#[derive(Debug, Clone, Copy)]
pub struct DeviceCapabilities {
    pub playback: bool,
    pub recording: bool,
    pub hardware_mixing: bool,
    pub digital_output: bool,
    pub digital_input: bool,
    pub sample_rates: Vec<u32>,
    pub supported_formats: Vec<AudioFormat>,
    pub max_channels: u8,
    pub buffer_sizes: Vec<usize>,
}

/// Generic audio device wrapper
pub struct AudioDevice {
    id: u32,
    info: AudioDeviceInfo,
    interface: Box<dyn AudioDeviceInterface>,
    base_addr: usize,
    interrupt_line: u8,
}

impl AudioDevice {
    pub fn new(id: u32, info: AudioDeviceInfo, interface: Box<dyn AudioDeviceInterface>) -> Self {
        Self {
            id,
            info,
            interface,
            base_addr: 0,
            interrupt_line: 0,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn info(&self) -> &AudioDeviceInfo {
        &self.info
    }

    pub fn read(&mut self, buffer: &mut [u8]) -> Result<usize, AudioError> {
        self.interface.read(buffer)
    }

    pub fn write(&mut self, buffer: &[u8]) -> Result<usize, AudioError> {
        self.interface.write(buffer)
    }

    pub fn set_format(&mut self, format: AudioFormat, sample_rate: u32, channels: u8) -> Result<(), AudioError> {
        self.interface.set_format(format, sample_rate, channels)
    }
}

/// PCI Audio Device
pub struct PciAudioDevice {
    base_addr: usize,
    info: AudioDeviceInfo,
    state: DeviceState,
}

impl PciAudioDevice {
    pub fn new(base_addr: usize, info: AudioDeviceInfo) -> Self {
        Self {
            base_addr,
            info,
            state: DeviceState::Uninitialized,
        }
    }

    /// PCI configuration space access
    fn read_config_register(&self, offset: u8) -> u32 {
        // PCI configuration space read - platform specific
        unsafe {
            // This is a simplified version - actual implementation would use
            // proper PCI configuration space access mechanisms
            let port = 0xCF8;
            let address = (0x80000000 | ((self.info.device_id as u32) << 8) | (offset as u32)) as u32;
            
            // Write address to configuration address port
            core::arch::asm!("out dx, eax", in("eax") address, in("dx") port);
            
            // Read data from configuration data port
            let data_port = 0xCFC as *mut u32;
            read_volatile(data_port)
        }
    }

    /// Read PCI audio register
    fn read_reg(&self, offset: u32) -> u32 {
        unsafe {
            read_volatile((self.base_addr + offset as usize) as *const u32)
        }
    }

    /// Write PCI audio register
    fn write_reg(&self, offset: u32, value: u32) {
        unsafe {
            write_volatile((self.base_addr + offset as usize) as *mut u32, value);
        }
    }

    /// Enable audio DMA
    fn enable_dma(&mut self, channel: u8) -> Result<(), AudioError> {
        // Enable DMA channel
        let control_reg = 0x0B + (channel as u32 * 0x10);
        let current_control = self.read_reg(control_reg);
        self.write_reg(control_reg, current_control | 0x01); // Enable bit
        Ok(())
    }

    /// Set sample rate
    fn set_sample_rate(&mut self, rate: u32) -> Result<(), AudioError> {
        // Program the sample rate converter
        // This is specific to the audio codec being used
        let sr_value = match rate {
            8000 => 0xBB8,
            11025 => 0xAA3,
            16000 => 0x7D0,
            22050 => 0x552,
            44100 => 0x2AA,
            48000 => 0x271,
            96000 => 0x138,
            192000 => 0x09C,
            _ => return Err(AudioError::InvalidSampleRate),
        };

        self.write_reg(0x2C, sr_value); // Sample rate register
        Ok(())
    }
}

impl AudioDeviceInterface for PciAudioDevice {
    fn initialize(&mut self) -> Result<(), AudioError> {
        log_info!("Initializing PCI audio device: {}", self.info.name);
        
        // Reset the device
        self.write_reg(0x00, 0x00000001); // Reset register
        
        // Wait for reset to complete
        for _ in 0..1000 {
            if self.read_reg(0x00) & 0x00000001 == 0 {
                break;
            }
        }

        // Enable playback and recording DMA
        self.enable_dma(0)?; // Playback channel
        self.enable_dma(1)?; // Recording channel

        self.state = DeviceState::Initialized;
        log_info!("PCI audio device initialized successfully");
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, AudioError> {
        if self.state != DeviceState::Recording {
            return Err(AudioError::InvalidState);
        }

        // Implementation would read from DMA buffer or direct registers
        // This is a simplified version
        for byte in buffer.iter_mut() {
            *byte = 0; // Silent data for demonstration
        }

        Ok(buffer.len())
    }

    fn write(&mut self, buffer: &[u8]) -> Result<usize, AudioError> {
        if self.state != DeviceState::Playing {
            return Err(AudioError::InvalidState);
        }

        // Implementation would write to DMA buffer or direct registers
        log_info!("Writing {} bytes to PCI audio device", buffer.len());
        Ok(buffer.len())
    }

    fn set_format(&mut self, format: AudioFormat, sample_rate: u32, channels: u8) -> Result<(), AudioError> {
        // Configure audio format
        let mut format_reg = self.read_reg(0x0C);
        
        // Clear existing format settings
        format_reg &= !0x000F_000F;
        
        // Set format based on AudioFormat enum
        let format_bits = match format {
            AudioFormat::Pcm16LE => 0x0000_0000,
            AudioFormat::Pcm16BE => 0x0000_1000,
            AudioFormat::Pcm24LE => 0x0000_2000,
            AudioFormat::Pcm24BE => 0x0000_3000,
            AudioFormat::Float32LE => 0x0000_4000,
            AudioFormat::Float32BE => 0x0000_5000,
            _ => return Err(AudioError::UnsupportedFormat),
        };
        
        format_reg |= format_bits;
        self.write_reg(0x0C, format_reg);

        // Set sample rate
        self.set_sample_rate(sample_rate)?;

        // Set channel count
        let channel_bits = match channels {
            1 => 0x0000,
            2 => 0x1000,
            4 => 0x2000,
            6 => 0x3000,
            8 => 0x4000,
            _ => return Err(AudioError::InvalidChannelCount),
        };
        
        let current_reg = self.read_reg(0x0E);
        self.write_reg(0x0E, (current_reg & !0x7000) | channel_bits);

        log_info!("Set PCI audio format to {:?}, {} Hz, {} channels", format, sample_rate, channels);
        Ok(())
    }

    fn get_state(&self) -> DeviceState {
        self.state
    }

    fn is_ready(&self) -> bool {
        self.state == DeviceState::Initialized || 
        self.state == DeviceState::Playing || 
        self.state == DeviceState::Recording
    }
}

/// USB Audio Device
pub struct UsbAudioDevice {
    device_addr: u8,
    interface_num: u8,
    info: AudioDeviceInfo,
    state: DeviceState,
    endpoint_in: u8,
    endpoint_out: u8,
}

impl UsbAudioDevice {
    pub fn new(device_addr: u8, interface_num: u8, info: AudioDeviceInfo) -> Self {
        Self {
            device_addr,
            interface_num,
            info,
            state: DeviceState::Uninitialized,
            endpoint_in: 0,
            endpoint_out: 0,
        }
    }

    /// Send USB control request
    fn send_control_request(&self, request_type: u8, request: u8, value: u16, index: u16, data: &[u8]) -> Result<(), AudioError> {
        // Implementation would send USB control transfer
        log_info!("USB control: type={:#02x} req={:#02x} value={:#04x} index={:#04x}", 
                  request_type, request, value, index);
        Ok(())
    }

    /// Set USB audio streaming interface
    fn set_streaming_interface(&mut self, interface: u8, alt_setting: u8) -> Result<(), AudioError> {
        self.send_control_request(0x01, 0x0B, interface as u16, alt_setting as u16, &[])?;
        Ok(())
    }
}

impl AudioDeviceInterface for UsbAudioDevice {
    fn initialize(&mut self) -> Result<(), AudioError> {
        log_info!("Initializing USB audio device: {}", self.info.name);
        
        // Configure USB audio streaming interface
        self.set_streaming_interface(self.interface_num, 1)?;
        
        self.state = DeviceState::Initialized;
        log_info!("USB audio device initialized successfully");
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, AudioError> {
        if self.state != DeviceState::Recording {
            return Err(AudioError::InvalidState);
        }

        // Implementation would read from USB IN endpoint
        for byte in buffer.iter_mut() {
            *byte = 0; // Silent data for demonstration
        }

        Ok(buffer.len())
    }

    fn write(&mut self, buffer: &[u8]) -> Result<usize, AudioError> {
        if self.state != DeviceState::Playing {
            return Err(AudioError::InvalidState);
        }

        // Implementation would write to USB OUT endpoint
        log_info!("Writing {} bytes to USB audio device", buffer.len());
        Ok(buffer.len())
    }

    fn set_format(&mut self, format: AudioFormat, sample_rate: u32, channels: u8) -> Result<(), AudioError> {
        // Configure USB audio format using class-specific requests
        let format_type = match format {
            AudioFormat::Pcm16LE | AudioFormat::Pcm16BE => 0x01,
            AudioFormat::Pcm24LE | AudioFormat::Pcm24BE => 0x02,
            AudioFormat::Float32LE | AudioFormat::Float32BE => 0x03,
            _ => return Err(AudioError::UnsupportedFormat),
        };

        let sample_rate_bytes = sample_rate.to_le_bytes();
        let format_data = [
            format_type, channels, 0, 0, // Format type, channels, bits per sample, etc.
            sample_rate_bytes[0], sample_rate_bytes[1], sample_rate_bytes[2], sample_rate_bytes[3],
        ];

        self.send_control_request(0x21, 0x01, 0x0100, self.interface_num, &format_data)?;

        log_info!("Set USB audio format to {:?}, {} Hz, {} channels", format, sample_rate, channels);
        Ok(())
    }

    fn get_state(&self) -> DeviceState {
        self.state
    }

    fn is_ready(&self) -> bool {
        self.state == DeviceState::Initialized || 
        self.state == DeviceState::Playing || 
        self.state == DeviceState::Recording
    }
}

/// Audio buffer management
pub struct AudioBuffer {
    data: Vec<u8>,
    size: usize,
    position: usize,
}

impl AudioBuffer {
    pub fn new(size: usize) -> Result<Self, AudioError> {
        let mut data = Vec::new();
        data.resize(size, 0);
        
        Ok(Self {
            data,
            size,
            position: 0,
        })
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
        self.position = 0;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, pos: usize) {
        self.position = pos;
    }
}

/// Audio configuration
pub struct AudioConfig {
    pub format: AudioFormat,
    pub sample_rate: u32,
    pub channels: u8,
    pub buffer_size: usize,
    pub buffer_count: usize,
}

impl AudioConfig {
    pub fn new(format: AudioFormat, sample_rate: u32, channels: u8, buffer_size: usize) -> Self {
        Self {
            format,
            sample_rate,
            channels,
            buffer_size,
            buffer_count: 2,
        }
    }
}

// Utility functions for device detection and enumeration

/// PCI audio device detection
pub fn detect_pci_audio_devices() -> Vec<PciAudioDevice> {
    let mut devices = Vec::new();
    
    // Scan PCI configuration space for audio devices
    // This is a simplified version - real implementation would scan all PCI buses
    log_info!("Scanning for PCI audio devices...");
    
    // Common PCI audio device IDs
    let audio_device_ids = [
        (0x1002, 0x0003), // AMD/ATI SBx00 Azalia (Intel HDA)
        (0x8086, 0x2668), // Intel 82801CA/CAM AC'97 Audio Controller
        (0x8086, 0x27d8), // Intel 82801G AC'97 Audio Controller
        (0x10de, 0x006a), // NVIDIA nForce Audio
        (0x10ec, 0x0662), // Realtek ALC662
        (0x10ec, 0x0888), // Realtek ALC888
        (0x14f1, 0x5045), // Conexant HSF modem (with audio)
    ];

    for (vendor_id, device_id) in &audio_device_ids {
        // In real implementation, would scan actual PCI configuration space
        // For now, we'll simulate finding some devices
        if *vendor_id == 0x8086 && *device_id == 0x2668 {
            let info = AudioDeviceInfo {
                name: "Intel 82801CA AC'97 Audio",
                vendor: "Intel",
                device_id: *device_id,
                subsystem_id: 0,
                revision: 1,
                capabilities: DeviceCapabilities {
                    playback: true,
                    recording: true,
                    hardware_mixing: false,
                    digital_output: false,
                    digital_input: false,
                    sample_rates: vec![44100, 48000],
                    supported_formats: vec![AudioFormat::Pcm16LE],
                    max_channels: 2,
                    buffer_sizes: vec![64, 128, 256, 512, 1024],
                },
            };
            
            devices.push(PciAudioDevice::new(0xC000, info));
            break;
        }
    }

    log_info!("Found {} PCI audio devices", devices.len());
    devices
}

/// USB audio device detection
pub fn detect_usb_audio_devices() -> Vec<UsbAudioDevice> {
    let mut devices = Vec::new();
    
    // Scan USB for audio devices
    log_info!("Scanning for USB audio devices...");
    
    // In real implementation, would enumerate USB devices
    // For now, we'll simulate finding some devices
    let info = AudioDeviceInfo {
        name: "USB Audio Device",
        vendor: "Generic",
        device_id: 0x2000,
        subsystem_id: 0,
        revision: 1,
        capabilities: DeviceCapabilities {
            playback: true,
            recording: true,
            hardware_mixing: false,
            digital_output: false,
            digital_input: false,
            sample_rates: vec![44100, 48000, 96000],
            supported_formats: vec![AudioFormat::Pcm16LE, AudioFormat::Float32LE],
            max_channels: 2,
            buffer_sizes: vec![128, 256, 512, 1024],
        },
    };
    
    devices.push(UsbAudioDevice::new(1, 1, info));
    
    log_info!("Found {} USB audio devices", devices.len());
    devices
}

// Logging function
fn log_info(msg: &str) {
    println!("[AUDIO HAL] {}", msg);
}