//! Audio Codec Support
//! 
//! This module provides implementations for various audio codecs:
//! - AC'97 Audio Codec
//! - HD Audio (Intel HDA) Codec
//! - I2S Audio Codec (for embedded systems)

use crate::hal::{AudioDevice, AudioBuffer, AudioConfig};
use crate::core::{AudioFormat, AudioError, StreamState};
use alloc::vec::Vec;
use alloc::collections::BTreeMap;

/// Generic audio codec trait
pub trait AudioCodec {
    /// Initialize the codec
    fn initialize(&mut self) -> Result<(), AudioError>;
    
    /// Configure codec settings
    fn configure(&mut self, config: &AudioConfig) -> Result<(), AudioError>;
    
    /// Start codec operation
    fn start(&mut self, stream_type: StreamType) -> Result<(), AudioError>;
    
    /// Stop codec operation
    fn stop(&mut self, stream_type: StreamType) -> Result<(), AudioError>;
    
    /// Get codec information
    fn get_info(&self) -> &CodecInfo;
    
    /// Reset codec to default state
    fn reset(&mut self) -> Result<(), AudioError>;
}

/// Stream types for codec operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreamType {
    Playback,
    Recording,
    Simultaneous,
}

/// Codec information structure
#[derive(Debug, Clone)]
pub struct CodecInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub capabilities: CodecCapabilities,
    pub sample_rates: Vec<u32>,
    pub formats: Vec<AudioFormat>,
    pub channels: Vec<u8>,
}

/// Codec capabilities
#[derive(Debug, Clone, Copy)]
pub struct CodecCapabilities {
    pub playback_channels: u8,
    pub recording_channels: u8,
    pub concurrent_streams: u8,
    pub hardware_mixing: bool,
    pub digital_output: bool,
    pub digital_input: bool,
    pub surround_sound: bool,
    pub high_sample_rates: bool,
}

/// AC'97 Audio Codec Implementation
pub struct Ac97Codec {
    base_addr: usize,
    info: CodecInfo,
    state: CodecState,
    current_config: Option<AudioConfig>,
    mixer_regs: [u16; 64], // AC'97 mixer registers
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CodecState {
    Reset,
    Active,
    Playing,
    Recording,
    Error,
}

impl Ac97Codec {
    pub fn new(base_addr: usize) -> Self {
        let info = CodecInfo {
            name: "AC'97 Audio Codec",
            version: "2.3",
            capabilities: CodecCapabilities {
                playback_channels: 6,
                recording_channels: 2,
                concurrent_streams: 2,
                hardware_mixing: true,
                digital_output: false,
                digital_input: false,
                surround_sound: true,
                high_sample_rates: false,
            },
            sample_rates: vec![8000, 11025, 16000, 22050, 44100, 48000],
            formats: vec![AudioFormat::Pcm16LE],
            channels: vec![1, 2, 4, 6],
        };

        Self {
            base_addr,
            info,
            state: CodecState::Reset,
            current_config: None,
            mixer_regs: [0; 64],
        }
    }

    /// Read AC'97 register
    fn read_reg(&self, offset: u8) -> u16 {
        unsafe {
            let addr = self.base_addr + (offset as usize) * 2;
            core::ptr::read_volatile(addr as *const u16)
        }
    }

    /// Write AC'97 register
    fn write_reg(&self, offset: u8, value: u16) {
        unsafe {
            let addr = self.base_addr + (offset as usize) * 2;
            core::ptr::write_volatile(addr as *mut u16, value);
        }
    }

    /// Wait for codec ready
    fn wait_ready(&self) -> Result<(), AudioError> {
        for _ in 0..1000 {
            if self.read_reg(0x00) & 0x8000 != 0 {
                return Ok(());
            }
        }
        Err(AudioError::HardwareError)
    }

    /// Reset AC'97 codec
    fn reset(&mut self) -> Result<(), AudioError> {
        // Reset codec
        self.write_reg(0x00, 0x0000);
        self.write_reg(0x00, 0x8000);
        
        // Wait for reset to complete
        self.wait_ready()?;
        
        // Configure default mixer settings
        self.configure_default_mixer()?;
        
        self.state = CodecState::Active;
        log_info!("AC'97 codec reset completed");
        Ok(())
    }

    /// Configure default mixer settings
    fn configure_default_mixer(&mut self) -> Result<(), AudioError> {
        // Master volume (both channels)
        self.write_reg(0x02, 0x0000); // Mute master volume
        
        // Headphone volume
        self.write_reg(0x04, 0x8000); // Mute headphones
        
        // Mono out volume
        self.write_reg(0x06, 0x8000); // Mute mono out
        
        // PCM out volume
        self.write_reg(0x18, 0x0000); // Mute PCM out
        
        // Line in volume
        self.write_reg(0x10, 0x0000); // Mute line in
        
        // Mic volume
        self.write_reg(0x0E, 0x8000); // Mute mic
        
        // PC beep volume
        self.write_reg(0x0A, 0x8000); // Mute PC beep
        
        Ok(())
    }

    /// Set PCM out volume
    pub fn set_pcm_volume(&mut self, left: u8, right: u8) -> Result<(), AudioError> {
        let left_reg = (left as u16) & 0x1F;
        let right_reg = ((right as u16) & 0x1F) << 8;
        self.write_reg(0x18, left_reg | right_reg);
        Ok(())
    }

    /// Set master volume
    pub fn set_master_volume(&mut self, left: u8, right: u8) -> Result<(), AudioError> {
        let left_reg = (left as u16) & 0x1F;
        let right_reg = ((right as u16) & 0x1F) << 8;
        self.write_reg(0x02, left_reg | right_reg);
        Ok(())
    }

    /// Enable PCM out
    pub fn enable_pcm_out(&mut self) -> Result<(), AudioError> {
        let current = self.read_reg(0x3C);
        self.write_reg(0x3C, current | 0x4000);
        Ok(())
    }

    /// Disable PCM out
    pub fn disable_pcm_out(&mut self) -> Result<(), AudioError> {
        let current = self.read_reg(0x3C);
        self.write_reg(0x3C, current & !0x4000);
        Ok(())
    }

    /// Enable line in for recording
    pub fn enable_line_in(&mut self) -> Result<(), AudioError> {
        let current = self.read_reg(0x3C);
        self.write_reg(0x3C, current | 0x0400);
        Ok(())
    }

    /// Disable line in
    pub fn disable_line_in(&mut self) -> Result<(), AudioError> {
        let current = self.read_reg(0x3C);
        self.write_reg(0x3C, current & !0x0400);
        Ok(())
    }
}

impl AudioCodec for Ac97Codec {
    fn initialize(&mut self) -> Result<(), AudioError> {
        log_info!("Initializing AC'97 codec");
        self.reset()
    }

    fn configure(&mut self, config: &AudioConfig) -> Result<(), AudioError> {
        // AC'97 only supports 16-bit PCM
        if config.format != AudioFormat::Pcm16LE {
            return Err(AudioError::UnsupportedFormat);
        }

        // AC'97 only supports specific sample rates
        if !self.info.sample_rates.contains(&config.sample_rate) {
            return Err(AudioError::InvalidSampleRate);
        }

        // AC'97 supports mono, stereo, and surround
        if !self.info.channels.contains(&config.channels) {
            return Err(AudioError::InvalidChannelCount);
        }

        // Configure sample rate in the codec
        let rate_bits = match config.sample_rate {
            8000 => 0x1F40,
            11025 => 0x1F14,
            16000 => 0x1E60,
            22050 => 0x1E56,
            44100 => 0x1E2A,
            48000 => 0x1E00,
            _ => return Err(AudioError::InvalidSampleRate),
        };

        self.write_reg(0x2C, rate_bits);

        self.current_config = Some(config.clone());
        log_info!("AC'97 configured: {} Hz, {} channels", config.sample_rate, config.channels);
        Ok(())
    }

    fn start(&mut self, stream_type: StreamType) -> Result<(), AudioError> {
        match stream_type {
            StreamType::Playback => {
                self.enable_pcm_out()?;
                self.state = CodecState::Playing;
            },
            StreamType::Recording => {
                self.enable_line_in()?;
                self.state = CodecState::Recording;
            },
            StreamType::Simultaneous => {
                self.enable_pcm_out()?;
                self.enable_line_in()?;
                self.state = CodecState::Active;
            },
        }

        log_info!("AC'97 codec started: {:?}", stream_type);
        Ok(())
    }

    fn stop(&mut self, stream_type: StreamType) -> Result<(), AudioError> {
        match stream_type {
            StreamType::Playback => {
                self.disable_pcm_out()?;
                if self.state == CodecState::Playing {
                    self.state = CodecState::Active;
                }
            },
            StreamType::Recording => {
                self.disable_line_in()?;
                if self.state == CodecState::Recording {
                    self.state = CodecState::Active;
                }
            },
            StreamType::Simultaneous => {
                self.disable_pcm_out()?;
                self.disable_line_in()?;
                self.state = CodecState::Active;
            },
        }

        log_info!("AC'97 codec stopped: {:?}", stream_type);
        Ok(())
    }

    fn get_info(&self) -> &CodecInfo {
        &self.info
    }

    fn reset(&mut self) -> Result<(), AudioError> {
        self.reset()
    }
}

/// HD Audio (Intel HDA) Codec Implementation
pub struct HdAudioCodec {
    base_addr: usize,
    info: CodecInfo,
    state: CodecState,
    current_config: Option<AudioConfig>,
    widget_list: Vec<WidgetInfo>,
}

#[derive(Debug, Clone)]
struct WidgetInfo {
    nid: u8,
    widget_type: WidgetType,
    capabilities: u32,
}

#[derive(Debug, Clone, Copy)]
enum WidgetType {
    AudioOutput = 0x0,
    AudioInput = 0x1,
    AudioMixer = 0x2,
    AudioSelector = 0x3,
    PinComplex = 0x4,
    PowerWidget = 0x5,
    VolumeKnob = 0x6,
    BeepGenerator = 0x7,
    VendorDefined = 0xF,
}

impl HdAudioCodec {
    pub fn new(base_addr: usize) -> Self {
        let info = CodecInfo {
            name: "HD Audio Codec",
            version: "1.0",
            capabilities: CodecCapabilities {
                playback_channels: 16,
                recording_channels: 16,
                concurrent_streams: 32,
                hardware_mixing: true,
                digital_output: true,
                digital_input: true,
                surround_sound: true,
                high_sample_rates: true,
            },
            sample_rates: vec![8000, 11025, 16000, 22050, 44100, 48000, 96000, 192000],
            formats: vec![
                AudioFormat::Pcm16LE,
                AudioFormat::Pcm24LE,
                AudioFormat::Float32LE,
            ],
            channels: vec![1, 2, 4, 6, 8],
        };

        Self {
            base_addr,
            info,
            state: CodecState::Reset,
            current_config: None,
            widget_list: Vec::new(),
        }
    }

    /// Read HDA codec register
    fn read_reg(&self, codec_addr: u8, nid: u16, verb: u16, payload: u16) -> u32 {
        unsafe {
            // HDA register read operation
            let command = ((codec_addr as u32) << 28) |
                         ((nid as u32) << 20) |
                         ((verb as u32) << 8) |
                         (payload as u32);
            
            // Write command to HDA command register
            let cmd_reg = self.base_addr as *const u32;
            core::ptr::write_volatile(cmd_reg, command);
            
            // Read response from HDA response register
            let resp_reg = (self.base_addr + 4) as *const u32;
            core::ptr::read_volatile(resp_reg)
        }
    }

    /// Write HDA codec register
    fn write_reg(&self, codec_addr: u8, nid: u16, verb: u16, payload: u16) {
        unsafe {
            let command = ((codec_addr as u32) << 28) |
                         ((nid as u32) << 20) |
                         ((verb as u32) << 8) |
                         (payload as u32);
            
            let cmd_reg = self.base_addr as *mut u32;
            core::ptr::write_volatile(cmd_reg, command);
        }
    }

    /// Get widget capabilities
    fn get_widget_caps(&self, codec_addr: u8, nid: u8) -> u32 {
        self.read_reg(codec_addr, nid as u16, 0xF00, 0x00)
    }

    /// Get widget type
    fn get_widget_type(&self, codec_addr: u8, nid: u8) -> WidgetType {
        let caps = self.get_widget_caps(codec_addr, nid);
        let widget_type = (caps >> 20) & 0xF;
        
        match widget_type {
            0x0 => WidgetType::AudioOutput,
            0x1 => WidgetType::AudioInput,
            0x2 => WidgetType::AudioMixer,
            0x3 => WidgetType::AudioSelector,
            0x4 => WidgetType::PinComplex,
            0x5 => WidgetType::PowerWidget,
            0x6 => WidgetType::VolumeKnob,
            0x7 => WidgetType::BeepGenerator,
            0xF => WidgetType::VendorDefined,
            _ => WidgetType::VendorDefined,
        }
    }

    /// Enumerate codec widgets
    fn enumerate_widgets(&mut self, codec_addr: u8) -> Result<(), AudioError> {
        self.widget_list.clear();
        
        // Start with widget 1 (assuming standard layout)
        for nid in 1..=32 {
            let widget_type = self.get_widget_type(codec_addr, nid);
            
            if widget_type != WidgetType::VendorDefined {
                let capabilities = self.get_widget_caps(codec_addr, nid);
                
                self.widget_list.push(WidgetInfo {
                    nid,
                    widget_type,
                    capabilities,
                });
            }
        }
        
        log_info!("HDA codec found {} widgets", self.widget_list.len());
        Ok(())
    }

    /// Set sample format
    fn set_format(&self, codec_addr: u8, stream_nid: u8, config: &AudioConfig) -> Result<(), AudioError> {
        let stream_tag = 1; // Use stream tag 1
        let channel_id = 1; // Use channel ID 1
        
        // Convert AudioFormat to HDA format bits
        let format_bits = match config.format {
            AudioFormat::Pcm16LE => 0x0001,
            AudioFormat::Pcm24LE => 0x0002,
            AudioFormat::Float32LE => 0x0003,
            _ => return Err(AudioError::UnsupportedFormat),
        };

        // Convert sample rate to HDA sample rate bits
        let rate_bits = match config.sample_rate {
            8000 => 0x0001,
            11025 => 0x0002,
            16000 => 0x0003,
            22050 => 0x0004,
            44100 => 0x0005,
            48000 => 0x0006,
            96000 => 0x0007,
            192000 => 0x0008,
            _ => return Err(AudioError::InvalidSampleRate),
        };

        // Channel count to bit field
        let channels_bits = match config.channels {
            1 => 0x0000,
            2 => 0x0001,
            4 => 0x0002,
            6 => 0x0003,
            8 => 0x0004,
            _ => return Err(AudioError::InvalidChannelCount),
        };

        let stream_format = format_bits | (rate_bits << 8) | (channels_bits << 16);
        
        // Set stream format
        self.write_reg(codec_addr, stream_nid as u16, 0x200, stream_format);
        
        Ok(())
    }

    /// Set stream tag
    fn set_stream_tag(&self, codec_addr: u8, stream_nid: u8, stream_tag: u8) {
        self.write_reg(codec_addr, stream_nid as u16, 0x204, stream_tag as u16);
    }
}

impl AudioCodec for HdAudioCodec {
    fn initialize(&mut self) -> Result<(), AudioError> {
        log_info!("Initializing HD Audio codec");
        
        // Enumerate codec widgets
        self.enumerate_widgets(0)?; // Assume codec address 0
        
        self.state = CodecState::Active;
        log_info!("HD Audio codec initialized");
        Ok(())
    }

    fn configure(&mut self, config: &AudioConfig) -> Result<(), AudioError> {
        // HD Audio supports many formats and sample rates
        if !self.info.formats.contains(&config.format) {
            return Err(AudioError::UnsupportedFormat);
        }

        if !self.info.sample_rates.contains(&config.sample_rate) {
            return Err(AudioError::InvalidSampleRate);
        }

        if !self.info.channels.contains(&config.channels) {
            return Err(AudioError::InvalidChannelCount);
        }

        // Find appropriate output/input widgets
        // For simplicity, assume widget 2 is output and widget 3 is input
        self.set_format(0, 2, config)?;
        self.set_format(0, 3, config)?;

        self.current_config = Some(config.clone());
        log_info!("HD Audio configured: {:?}, {} Hz, {} channels", 
                 config.format, config.sample_rate, config.channels);
        Ok(())
    }

    fn start(&mut self, stream_type: StreamType) -> Result<(), AudioError> {
        match stream_type {
            StreamType::Playback => {
                self.set_stream_tag(0, 2, 1);
                self.state = CodecState::Playing;
            },
            StreamType::Recording => {
                self.set_stream_tag(0, 3, 2);
                self.state = CodecState::Recording;
            },
            StreamType::Simultaneous => {
                self.set_stream_tag(0, 2, 1);
                self.set_stream_tag(0, 3, 2);
                self.state = CodecState::Active;
            },
        }

        log_info!("HD Audio codec started: {:?}", stream_type);
        Ok(())
    }

    fn stop(&mut self, stream_type: StreamType) -> Result<(), AudioError> {
        match stream_type {
            StreamType::Playback => {
                self.set_stream_tag(0, 2, 0);
                if self.state == CodecState::Playing {
                    self.state = CodecState::Active;
                }
            },
            StreamType::Recording => {
                self.set_stream_tag(0, 3, 0);
                if self.state == CodecState::Recording {
                    self.state = CodecState::Active;
                }
            },
            StreamType::Simultaneous => {
                self.set_stream_tag(0, 2, 0);
                self.set_stream_tag(0, 3, 0);
                self.state = CodecState::Active;
            },
        }

        log_info!("HD Audio codec stopped: {:?}", stream_type);
        Ok(())
    }

    fn get_info(&self) -> &CodecInfo {
        &self.info
    }

    fn reset(&mut self) -> Result<(), AudioError> {
        self.state = CodecState::Reset;
        log_info!("HD Audio codec reset");
        Ok(())
    }
}

/// I2S Audio Codec Implementation (for embedded systems)
pub struct I2sCodec {
    base_addr: usize,
    info: CodecInfo,
    state: CodecState,
    current_config: Option<AudioConfig>,
    clock_divider: u16,
}

impl I2sCodec {
    pub fn new(base_addr: usize) -> Self {
        let info = CodecInfo {
            name: "I2S Audio Codec",
            version: "1.0",
            capabilities: CodecCapabilities {
                playback_channels: 2,
                recording_channels: 2,
                concurrent_streams: 1,
                hardware_mixing: false,
                digital_output: true,
                digital_input: true,
                surround_sound: false,
                high_sample_rates: true,
            },
            sample_rates: vec![8000, 16000, 22050, 44100, 48000, 96000, 192000],
            formats: vec![
                AudioFormat::Pcm16LE,
                AudioFormat::Pcm24LE,
                AudioFormat::Pcm32LE,
                AudioFormat::Float32LE,
            ],
            channels: vec![1, 2],
        };

        Self {
            base_addr,
            info,
            state: CodecState::Reset,
            current_config: None,
            clock_divider: 0,
        }
    }

    /// Configure I2S clock divider based on sample rate and MCLK
    fn configure_clock(&mut self, sample_rate: u32) -> Result<(), AudioError> {
        // Assuming MCLK = 12.288 MHz (common for audio)
        const MCLK: u32 = 12_288_000;
        
        let divider = MCLK / (sample_rate * 2 * 32); // I2S typically uses 32-bit slots
        
        if divider > 0xFFFF {
            return Err(AudioError::InvalidSampleRate);
        }

        self.clock_divider = divider as u16;
        
        // Write clock divider to hardware register
        unsafe {
            let div_reg = (self.base_addr + 0x04) as *mut u16;
            core::ptr::write_volatile(div_reg, self.clock_divider);
        }
        
        Ok(())
    }

    /// Configure I2S format
    fn configure_format(&self, config: &AudioConfig) -> Result<(), AudioError> {
        let mut format_reg: u32 = 0;
        
        // Set word length
        let word_length = match config.format {
            AudioFormat::Pcm16LE | AudioFormat::Pcm16BE => 16,
            AudioFormat::Pcm24LE | AudioFormat::Pcm24BE => 24,
            AudioFormat::Pcm32LE | AudioFormat::Pcm32BE |
            AudioFormat::Float32LE | AudioFormat::Float32BE => 32,
            _ => return Err(AudioError::UnsupportedFormat),
        };
        
        format_reg |= (word_length - 1) << 8;
        
        // Set channel count
        if config.channels == 2 {
            format_reg |= 0x01; // Stereo mode
        } else {
            format_reg &= !0x01; // Mono mode
        }
        
        // Write format register
        unsafe {
            let format_addr = (self.base_addr + 0x08) as *mut u32;
            core::ptr::write_volatile(format_addr, format_reg);
        }
        
        Ok(())
    }

    /// Enable I2S transmitter
    fn enable_transmitter(&self) {
        unsafe {
            let control_reg = (self.base_addr + 0x00) as *mut u32;
            let current = core::ptr::read_volatile(control_reg);
            core::ptr::write_volatile(control_reg, current | 0x01);
        }
    }

    /// Enable I2S receiver
    fn enable_receiver(&self) {
        unsafe {
            let control_reg = (self.base_addr + 0x00) as *mut u32;
            let current = core::ptr::read_volatile(control_reg);
            core::ptr::write_volatile(control_reg, current | 0x02);
        }
    }

    /// Disable I2S transmitter
    fn disable_transmitter(&self) {
        unsafe {
            let control_reg = (self.base_addr + 0x00) as *mut u32;
            let current = core::ptr::read_volatile(control_reg);
            core::ptr::write_volatile(control_reg, current & !0x01);
        }
    }

    /// Disable I2S receiver
    fn disable_receiver(&self) {
        unsafe {
            let control_reg = (self.base_addr + 0x00) as *mut u32;
            let current = core::ptr::read_volatile(control_reg);
            core::ptr::write_volatile(control_reg, current & !0x02);
        }
    }
}

impl AudioCodec for I2sCodec {
    fn initialize(&mut self) -> Result<(), AudioError> {
        log_info!("Initializing I2S codec");
        
        // Reset I2S hardware
        unsafe {
            let control_reg = (self.base_addr + 0x00) as *mut u32;
            core::ptr::write_volatile(control_reg, 0x10); // Reset bit
            core::ptr::write_volatile(control_reg, 0x00); // Clear reset
        }
        
        self.state = CodecState::Active;
        log_info!("I2S codec initialized");
        Ok(())
    }

    fn configure(&mut self, config: &AudioConfig) -> Result<(), AudioError> {
        // I2S has limited channel support
        if !self.info.channels.contains(&config.channels) {
            return Err(AudioError::InvalidChannelCount);
        }

        // Configure clock for sample rate
        self.configure_clock(config.sample_rate)?;
        
        // Configure I2S format
        self.configure_format(config)?;
        
        self.current_config = Some(config.clone());
        log_info!("I2S configured: {:?}, {} Hz, {} channels", 
                 config.format, config.sample_rate, config.channels);
        Ok(())
    }

    fn start(&mut self, stream_type: StreamType) -> Result<(), AudioError> {
        match stream_type {
            StreamType::Playback => {
                self.enable_transmitter();
                self.state = CodecState::Playing;
            },
            StreamType::Recording => {
                self.enable_receiver();
                self.state = CodecState::Recording;
            },
            StreamType::Simultaneous => {
                self.enable_transmitter();
                self.enable_receiver();
                self.state = CodecState::Active;
            },
        }

        log_info!("I2S codec started: {:?}", stream_type);
        Ok(())
    }

    fn stop(&mut self, stream_type: StreamType) -> Result<(), AudioError> {
        match stream_type {
            StreamType::Playback => {
                self.disable_transmitter();
                if self.state == CodecState::Playing {
                    self.state = CodecState::Active;
                }
            },
            StreamType::Recording => {
                self.disable_receiver();
                if self.state == CodecState::Recording {
                    self.state = CodecState::Active;
                }
            },
            StreamType::Simultaneous => {
                self.disable_transmitter();
                self.disable_receiver();
                self.state = CodecState::Active;
            },
        }

        log_info!("I2S codec stopped: {:?}", stream_type);
        Ok(())
    }

    fn get_info(&self) -> &CodecInfo {
        &self.info
    }

    fn reset(&mut self) -> Result<(), AudioError> {
        unsafe {
            let control_reg = (self.base_addr + 0x00) as *mut u32;
            core::ptr::write_volatile(control_reg, 0x10); // Reset bit
            core::ptr::write_volatile(control_reg, 0x00); // Clear reset
        }
        
        self.state = CodecState::Reset;
        log_info!("I2S codec reset");
        Ok(())
    }
}

/// Detect available audio codecs
pub fn detect_codecs() -> Vec<Box<dyn AudioCodec>> {
    let mut codecs: Vec<Box<dyn AudioCodec>> = Vec::new();
    
    log_info!("Detecting audio codecs...");
    
    // Check for AC'97 codec (typically at base address 0xC000)
    // In real implementation, would check PCI configuration space
    codecs.push(Box::new(Ac97Codec::new(0xC000)));
    
    // Check for HD Audio codec (typically at base address 0xD000)
    codecs.push(Box::new(HdAudioCodec::new(0xD000)));
    
    // Check for I2S codec (platform-specific addresses)
    // For embedded systems, this would be platform-specific
    #[cfg(feature = "embedded")]
    {
        codecs.push(Box::new(I2sCodec::new(0x4000_1000)));
    }
    
    log_info!("Found {} audio codecs", codecs.len());
    codecs
}

// Logging function
fn log_info(msg: &str) {
    println!("[AUDIO CODEC] {}", msg);
}