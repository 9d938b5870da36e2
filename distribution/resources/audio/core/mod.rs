//! MultiOS Audio Subsystem Core
//! 
//! This module provides the core audio infrastructure for MultiOS,
//! including device management, buffer management, and audio pipeline management.

use crate::hal::{AudioDevice, AudioBuffer, AudioConfig};
use crate::mixing::{Mixer, AudioStream};
use alloc::vec::Vec;
use alloc::collections::BTreeMap;

/// Audio subsystem error types
#[derive(Debug, Clone, Copy)]
pub enum AudioError {
    DeviceNotFound,
    UnsupportedFormat,
    BufferOverflow,
    BufferUnderflow,
    InvalidSampleRate,
    InvalidChannelCount,
    PermissionDenied,
    HardwareError,
    StreamNotFound,
    InvalidState,
}

/// Audio format specifications
#[derive(Debug, Clone, Copy)]
pub enum AudioFormat {
    /// 8-bit unsigned PCM
    Pcm8U,
    /// 8-bit signed PCM
    Pcm8S,
    /// 16-bit signed PCM little endian
    Pcm16LE,
    /// 16-bit signed PCM big endian
    Pcm16BE,
    /// 24-bit signed PCM little endian
    Pcm24LE,
    /// 24-bit signed PCM big endian
    Pcm24BE,
    /// 32-bit signed PCM little endian
    Pcm32LE,
    /// 32-bit signed PCM big endian
    Pcm32BE,
    /// 32-bit float little endian
    Float32LE,
    /// 32-bit float big endian
    Float32BE,
    /// 64-bit float little endian
    Float64LE,
    /// 64-bit float big endian
    Float64BE,
}

/// Audio stream states
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreamState {
    Idle,
    Playing,
    Paused,
    Stopped,
    Error,
}

/// Audio stream configuration
#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub format: AudioFormat,
    pub sample_rate: u32,
    pub channels: u8,
    pub buffer_size: usize,
    pub buffer_count: usize,
}

/// Audio stream handle
pub struct AudioStreamHandle {
    id: u32,
    state: StreamState,
    config: StreamConfig,
    buffer_pool: Vec<AudioBuffer>,
    current_buffer: usize,
}

/// Audio subsystem manager
pub struct AudioManager {
    devices: BTreeMap<u32, AudioDevice>,
    streams: BTreeMap<u32, AudioStreamHandle>,
    mixer: Mixer,
    sample_rate: u32,
    default_format: AudioFormat,
    active_stream_id: u32,
}

impl AudioManager {
    /// Create a new audio manager
    pub fn new(sample_rate: u32) -> Self {
        Self {
            devices: BTreeMap::new(),
            streams: BTreeMap::new(),
            mixer: Mixer::new(),
            sample_rate,
            default_format: AudioFormat::Pcm16LE,
            active_stream_id: 0,
        }
    }

    /// Initialize the audio subsystem
    pub fn initialize(&mut self) -> Result<(), AudioError> {
        // Initialize hardware abstraction layer
        self.detect_devices()?;
        
        // Set up the mixer
        self.mixer.initialize()?;
        
        // Start the audio processing thread
        self.start_audio_thread()?;
        
        Ok(())
    }

    /// Detect and register available audio devices
    fn detect_devices(&mut self) -> Result<(), AudioError> {
        // Implementation would detect PCI devices, USB devices, etc.
        // For now, we'll simulate device detection
        log_info!("AudioManager: Detecting audio devices...");
        Ok(())
    }

    /// Start the main audio processing thread
    fn start_audio_thread(&mut self) -> Result<(), AudioError> {
        // Implementation would spawn audio processing thread
        log_info!("AudioManager: Starting audio processing thread...");
        Ok(())
    }

    /// Register a new audio device
    pub fn register_device(&mut self, device: AudioDevice) -> Result<u32, AudioError> {
        let device_id = device.id();
        self.devices.insert(device_id, device);
        log_info!("AudioManager: Registered device {}", device_id);
        Ok(device_id)
    }

    /// Create a new audio stream
    pub fn create_stream(&mut self, config: StreamConfig) -> Result<u32, AudioError> {
        let stream_id = self.allocate_stream_id();
        
        let stream = AudioStreamHandle {
            id: stream_id,
            state: StreamState::Idle,
            config: config.clone(),
            buffer_pool: self.create_buffer_pool(&config)?,
            current_buffer: 0,
        };

        self.streams.insert(stream_id, stream);
        self.mixer.register_stream(stream_id, &config)?;
        
        log_info!("AudioManager: Created stream {} with format {:?}",
                 stream_id, config.format);
        Ok(stream_id)
    }

    /// Allocate a unique stream ID
    fn allocate_stream_id(&mut self) -> u32 {
        self.active_stream_id += 1;
        self.active_stream_id
    }

    /// Create buffer pool for audio stream
    fn create_buffer_pool(&self, config: &StreamConfig) -> Result<Vec<AudioBuffer>, AudioError> {
        let mut buffer_pool = Vec::new();
        let buffer_size_bytes = self.calculate_buffer_size(config)?;
        
        for _ in 0..config.buffer_count {
            let buffer = AudioBuffer::new(buffer_size_bytes)?;
            buffer_pool.push(buffer);
        }
        
        Ok(buffer_pool)
    }

    /// Calculate buffer size in bytes
    fn calculate_buffer_size(&self, config: &StreamConfig) -> Result<usize, AudioError> {
        let bytes_per_sample = match config.format {
            AudioFormat::Pcm8U | AudioFormat::Pcm8S => 1,
            AudioFormat::Pcm16LE | AudioFormat::Pcm16BE => 2,
            AudioFormat::Pcm24LE | AudioFormat::Pcm24BE => 3,
            AudioFormat::Pcm32LE | AudioFormat::Pcm32BE |
            AudioFormat::Float32LE | AudioFormat::Float32BE => 4,
            AudioFormat::Float64LE | AudioFormat::Float64BE => 8,
        };
        
        Ok(config.buffer_size * config.channels as usize * bytes_per_sample)
    }

    /// Start audio playback on a stream
    pub fn start_playback(&mut self, stream_id: u32) -> Result<(), AudioError> {
        if let Some(stream) = self.streams.get_mut(&stream_id) {
            stream.state = StreamState::Playing;
            self.mixer.enable_stream(stream_id)?;
            log_info!("AudioManager: Started playback on stream {}", stream_id);
            Ok(())
        } else {
            Err(AudioError::StreamNotFound)
        }
    }

    /// Stop audio playback on a stream
    pub fn stop_playback(&mut self, stream_id: u32) -> Result<(), AudioError> {
        if let Some(stream) = self.streams.get_mut(&stream_id) {
            stream.state = StreamState::Stopped;
            self.mixer.disable_stream(stream_id)?;
            log_info!("AudioManager: Stopped playback on stream {}", stream_id);
            Ok(())
        } else {
            Err(AudioError::StreamNotFound)
        }
    }

    /// Pause audio playback on a stream
    pub fn pause_playback(&mut self, stream_id: u32) -> Result<(), AudioError> {
        if let Some(stream) = self.streams.get_mut(&stream_id) {
            stream.state = StreamState::Paused;
            self.mixer.pause_stream(stream_id)?;
            log_info!("AudioManager: Paused playback on stream {}", stream_id);
            Ok(())
        } else {
            Err(AudioError::StreamNotFound)
        }
    }

    /// Resume audio playback on a stream
    pub fn resume_playback(&mut self, stream_id: u32) -> Result<(), AudioError> {
        if let Some(stream) = self.streams.get_mut(&stream_id) {
            stream.state = StreamState::Playing;
            self.mixer.resume_stream(stream_id)?;
            log_info!("AudioManager: Resumed playback on stream {}", stream_id);
            Ok(())
        } else {
            Err(AudioError::StreamNotFound)
        }
    }

    /// Get the state of an audio stream
    pub fn get_stream_state(&self, stream_id: u32) -> Result<StreamState, AudioError> {
        if let Some(stream) = self.streams.get(&stream_id) {
            Ok(stream.state)
        } else {
            Err(AudioError::StreamNotFound)
        }
    }

    /// Get available devices
    pub fn get_devices(&self) -> Vec<&AudioDevice> {
        self.devices.values().collect()
    }

    /// Get system audio capabilities
    pub fn get_capabilities(&self) -> AudioCapabilities {
        AudioCapabilities {
            supported_formats: vec![
                AudioFormat::Pcm16LE,
                AudioFormat::Pcm24LE,
                AudioFormat::Float32LE,
            ],
            max_sample_rate: 192000,
            max_channels: 8,
            max_buffer_size: 1024 * 1024, // 1MB
            hardware_mixing: true,
            software_mixing: true,
        }
    }
}

/// Audio system capabilities
#[derive(Debug, Clone)]
pub struct AudioCapabilities {
    pub supported_formats: Vec<AudioFormat>,
    pub max_sample_rate: u32,
    pub max_channels: u8,
    pub max_buffer_size: usize,
    pub hardware_mixing: bool,
    pub software_mixing: bool,
}

/// Audio subsystem initialization
pub static mut AUDIO_MANAGER: Option<AudioManager> = None;

/// Initialize the global audio manager
pub fn init_audio_system(sample_rate: u32) -> Result<(), AudioError> {
    unsafe {
        AUDIO_MANAGER = Some(AudioManager::new(sample_rate));
        AUDIO_MANAGER.as_mut().unwrap().initialize()?;
    }
    log_info!("Audio subsystem initialized successfully");
    Ok(())
}

/// Get the global audio manager
pub fn get_audio_manager() -> Option<&'static mut AudioManager> {
    unsafe {
        AUDIO_MANAGER.as_mut()
    }
}

// Logging functions (placeholder)
fn log_info(msg: &str) {
    println!("[AUDIO INFO] {}", msg);
}