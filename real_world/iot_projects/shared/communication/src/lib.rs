//! IoT Communication Protocols Module
//! Provides implementations for various IoT communication protocols
//! optimized for RISC-V architectures

use crate::riscv_hal::{Uart, I2CBus};
use heapless::{String, Vec};
use core::fmt::Write;
use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

// MQTT Protocol Types
#[derive(Debug, Clone, Copy)]
pub enum MqttMessageType {
    CONNECT = 1,
    CONNACK = 2,
    PUBLISH = 3,
    PUBACK = 4,
    PUBREC = 5,
    PUBREL = 6,
    PUBCOMP = 7,
    SUBSCRIBE = 8,
    SUBACK = 9,
    UNSUBSCRIBE = 10,
    UNSUBACK = 11,
    PINGREQ = 12,
    PINGRESP = 13,
    DISCONNECT = 14,
}

/// MQTT Quality of Service levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MqttQos {
    AtMostOnce = 0,
    AtLeastOnce = 1,
    ExactlyOnce = 2,
}

/// MQTT Message structure
#[derive(Debug)]
pub struct MqttMessage {
    pub message_type: MqttMessageType,
    pub flags: u8,
    pub payload: Vec<u8, 256>,
    pub topic: Option<String<128>>,
}

impl MqttMessage {
    pub fn new() -> Self {
        Self {
            message_type: MqttMessageType::CONNECT,
            flags: 0,
            payload: Vec::new(),
            topic: None,
        }
    }

    pub fn from_payload(payload: &[u8]) -> Self {
        let mut payload_vec = Vec::new();
        payload_vec.extend_from_slice(payload);
        
        Self {
            message_type: MqttMessageType::PUBLISH,
            flags: 0,
            payload: payload_vec,
            topic: None,
        }
    }
}

/// MQTT Client for RISC-V
pub struct MqttClient<'a> {
    transport: &'a dyn MqttTransport,
    client_id: String<32>,
    keep_alive: u16,
}

impl<'a> MqttClient<'a> {
    pub fn new<T: MqttTransport>(transport: &'a T, client_id: String<32>) -> Self {
        Self {
            transport,
            client_id,
            keep_alive: 60,
        }
    }

    /// Connect to MQTT broker
    pub fn connect(&mut self, broker_host: &str, username: Option<&str>, password: Option<&str>) -> Result<(), MqttError> {
        // Build CONNECT message
        let mut connect_message = MqttMessage::new();
        connect_message.message_type = MqttMessageType::CONNECT;
        
        // Variable header
        let protocol_name = "MQTT";
        connect_message.payload.extend_from_slice(&[0x00, 0x04]); // Protocol name length
        connect_message.payload.extend_from_slice(protocol_name.as_bytes());
        connect_message.payload.extend_from_slice(&[0x04]); // Protocol level (3.1.1)
        
        // Connect flags
        let mut connect_flags = 0u8;
        if username.is_some() {
            connect_flags |= 0x80;
        }
        if password.is_some() {
            connect_flags |= 0x40;
        }
        connect_flags |= 0x02; // Clean session
        connect_message.payload.push(connect_flags);
        
        // Keep alive
        connect_message.payload.extend_from_slice(&self.keep_alive.to_be_bytes());
        
        // Client ID
        self.add_string_to_payload(&mut connect_message.payload, &self.client_id);
        
        // Send message
        self.transport.send(&connect_message.as_bytes())?;
        
        // Wait for CONNACK
        let response = self.transport.receive(1000)?; // 1 second timeout
        if let Some(resp) = response {
            if self.parse_response(&resp)? == MqttMessageType::CONNACK {
                Ok(())
            } else {
                Err(MqttError::ProtocolError)
            }
        } else {
            Err(MqttError::Timeout)
        }
    }

    /// Publish a message
    pub fn publish(&mut self, topic: &str, payload: &[u8], qos: MqttQos) -> Result<(), MqttError> {
        let mut publish_message = MqttMessage::new();
        publish_message.message_type = MqttMessageType::PUBLISH;
        
        // QoS flags
        publish_message.flags |= (qos as u8) << 1;
        
        // Topic
        self.add_string_to_payload(&mut publish_message.payload, topic);
        
        // Message ID (for QoS 1 and 2)
        let msg_id = self.get_next_message_id();
        if qos != MqttQos::AtMostOnce {
            publish_message.payload.extend_from_slice(&msg_id.to_be_bytes());
        }
        
        // Payload
        publish_message.payload.extend_from_slice(payload);
        
        self.transport.send(&publish_message.as_bytes())
    }

    /// Subscribe to a topic
    pub fn subscribe(&mut self, topic: &str, qos: MqttQos) -> Result<(), MqttError> {
        let mut subscribe_message = MqttMessage::new();
        subscribe_message.message_type = MqttMessageType::SUBSCRIBE;
        subscribe_message.flags |= 0x02; // QoS flags
        
        let msg_id = self.get_next_message_id();
        subscribe_message.payload.extend_from_slice(&msg_id.to_be_bytes());
        
        // Topic and QoS
        self.add_string_to_payload(&mut subscribe_message.payload, topic);
        subscribe_message.payload.push(qos as u8);
        
        self.transport.send(&subscribe_message.as_bytes())
    }

    /// Send PINGREQ
    pub fn ping(&mut self) -> Result<(), MqttError> {
        let ping_message = MqttMessage {
            message_type: MqttMessageType::PINGREQ,
            flags: 0,
            payload: Vec::new(),
            topic: None,
        };
        
        self.transport.send(&ping_message.as_bytes())
    }

    /// Process incoming messages
    pub fn process_messages(&mut self) -> Result<(), MqttError> {
        if let Some(message) = self.transport.receive(0)? {
            let msg_type = self.parse_response(&message)?;
            
            match msg_type {
                MqttMessageType::PUBLISH => self.handle_publish(&message),
                MqttMessageType::PINGREQ => self.send_ping_response(),
                _ => Ok(()),
            }
        } else {
            Ok(())
        }
    }

    fn add_string_to_payload(&self, payload: &mut Vec<u8, 256>, string: &str) {
        let len = string.len() as u16;
        payload.extend_from_slice(&len.to_be_bytes());
        payload.extend_from_slice(string.as_bytes());
    }

    fn parse_response(&self, data: &[u8]) -> Result<MqttMessageType, MqttError> {
        if data.is_empty() {
            return Err(MqttError::InvalidMessage);
        }
        
        let msg_type = (data[0] >> 4) as u8;
        match msg_type {
            1 => Ok(MqttMessageType::CONNECT),
            2 => Ok(MqttMessageType::CONNACK),
            3 => Ok(MqttMessageType::PUBLISH),
            4 => Ok(MqttMessageType::PUBACK),
            8 => Ok(MqttMessageType::SUBSCRIBE),
            13 => Ok(MqttMessageType::PINGRESP),
            _ => Err(MqttError::UnsupportedMessage),
        }
    }

    fn handle_publish(&self, data: &[u8]) -> Result<(), MqttError> {
        // Parse PUBLISH message
        // This would parse topic, QoS, and payload
        // For brevity, just acknowledge
        Ok(())
    }

    fn send_ping_response(&mut self) -> Result<(), MqttError> {
        let ping_response = MqttMessage {
            message_type: MqttMessageType::PINGRESP,
            flags: 0,
            payload: Vec::new(),
            topic: None,
        };
        
        self.transport.send(&ping_response.as_bytes())
    }

    fn get_next_message_id(&mut self) -> u16 {
        static MESSAGE_ID: AtomicU16 = AtomicU16::new(1);
        MESSAGE_ID.fetch_add(1, Ordering::Relaxed)
    }
}

/// MQTT Transport trait
pub trait MqttTransport {
    fn send(&self, data: &[u8]) -> Result<(), MqttError>;
    fn receive(&self, timeout_ms: u32) -> Result<Option<Vec<u8, 256>>, MqttError>;
}

impl MqttMessage {
    pub fn as_bytes(&self) -> &[u8] {
        // Convert message to bytes
        &self.payload
    }
}

/// MQTT Error types
#[derive(Debug)]
pub enum MqttError {
    ConnectionRefused,
    ProtocolError,
    InvalidMessage,
    UnsupportedMessage,
    Timeout,
    TransportError,
}

/// WiFi Transport implementation using UART
pub struct WifiTransport {
    uart: &'static Uart,
    buffer: Vec<u8, 1024>,
}

impl WifiTransport {
    pub fn new(uart: &'static Uart) -> Self {
        Self {
            uart,
            buffer: Vec::new(),
        }
    }

    /// Initialize WiFi module
    pub fn init(&mut self, ssid: &str, password: &str) -> Result<(), WifiError> {
        // Send AT commands to configure WiFi
        self.send_command("AT+RST")?;
        self.delay_ms(2000);
        
        self.send_command("AT+CWMODE=1")?; // Station mode
        self.delay_ms(500);
        
        let mut cmd = String::<128>::new();
        write!(&mut cmd, "AT+CWJAP=\"{}\",\"{}\"", ssid, password).unwrap();
        self.send_command(&cmd)?;
        self.delay_ms(5000);
        
        Ok(())
    }

    /// Connect to MQTT broker over WiFi
    pub fn connect_mqtt(&mut self, broker: &str, port: u16) -> Result<(), WifiError> {
        let mut cmd = String::<128>::new();
        write!(&mut cmd, "AT+CIPSTART=\"TCP\",\"{}\",{}", broker, port).unwrap();
        self.send_command(&cmd)?;
        self.delay_ms(2000);
        
        Ok(())
    }

    fn send_command(&mut self, command: &str) -> Result<(), WifiError> {
        // Send AT command
        for byte in command.as_bytes() {
            self.uart.write_byte(*byte);
        }
        self.uart.write_byte(b'\r');
        self.uart.write_byte(b'\n');
        
        // Wait for response
        self.delay_ms(100);
        
        Ok(())
    }

    fn delay_ms(&self, ms: u32) {
        // Simple delay implementation
        let count = ms * 1000;
        for _ in 0..count {
            core::sync::atomic::spin_loop_hint();
        }
    }
}

impl MqttTransport for WifiTransport {
    fn send(&self, data: &[u8]) -> Result<(), MqttError> {
        // Send CIPSTART if not connected
        // Send length command
        // Send actual data
        for &byte in data {
            self.uart.write_byte(byte);
        }
        Ok(())
    }

    fn receive(&self, timeout_ms: u32) -> Result<Option<Vec<u8, 256>>, MqttError> {
        // Simple non-blocking read
        if let Some(byte) = self.uart.read_byte() {
            let mut vec = Vec::new();
            vec.push(byte);
            
            // Read more bytes until timeout or complete message
            for _ in 0..timeout_ms {
                if let Some(b) = self.uart.read_byte() {
                    vec.push(b);
                    if b == 0x00 { // End of message indicator
                        break;
                    }
                }
            }
            
            Ok(Some(vec))
        } else {
            Ok(None)
        }
    }
}

/// WiFi Error types
#[derive(Debug)]
pub enum WifiError {
    ConnectionFailed,
    Timeout,
    InvalidResponse,
    AuthenticationFailed,
}

/// LoRaWAN Communication
pub struct LoRaTransport {
    spi_bus: crate::riscv_hal::SpiBus,
    current_frequency: u32,
    spreading_factor: u8,
    transmission_power: u8,
}

impl LoRaTransport {
    pub const fn new(spi_bus: crate::riscv_hal::SpiBus) -> Self {
        Self {
            spi_bus,
            current_frequency: 868_100_000, // 868.1 MHz
            spreading_factor: 7,
            transmission_power: 14, // dBm
        }
    }

    /// Initialize LoRa module
    pub fn init(&mut self) -> Result<(), LoRaError> {
        // Reset module
        self.reset_module()?;
        
        // Set frequency
        self.set_frequency(self.current_frequency)?;
        
        // Set spreading factor
        self.set_spreading_factor(self.spreading_factor)?;
        
        // Set transmission power
        self.set_transmission_power(self.transmission_power)?;
        
        // Set other parameters
        self.configure_default()?;
        
        Ok(())
    }

    /// Send data via LoRaWAN
    pub fn send_data(&self, data: &[u8], destination: u32) -> Result<(), LoRaError> {
        // Prepare packet
        self.prepare_packet(data)?;
        
        // Set destination address
        self.set_destination(destination)?;
        
        // Send packet
        self.transmit_packet()
    }

    /// Receive data
    pub fn receive_data(&self) -> Result<Option<Vec<u8, 32>>, LoRaError> {
        if self.is_packet_received()? {
            let mut data = Vec::new();
            
            // Read payload
            let payload_size = self.get_payload_size()?;
            for _ in 0..payload_size {
                let byte = self.read_register(0x00)?;
                data.push(byte);
            }
            
            Ok(Some(data))
        } else {
            Ok(None)
        }
    }

    fn reset_module(&self) -> Result<(), LoRaError> {
        // Send reset sequence via SPI
        let reset_cmd = [0x42, 0x6D, 0x01];
        self.spi_bus.transfer(&reset_cmd);
        Ok(())
    }

    fn set_frequency(&self, freq_hz: u32) -> Result<(), LoRaError> {
        let freq_reg = (freq_hz >> 8) as u32;
        self.write_register(0x06, freq_reg as u8)?;
        self.current_frequency = freq_hz;
        Ok(())
    }

    fn set_spreading_factor(&self, sf: u8) -> Result<(), LoRaError> {
        let mut reg = self.read_register(0x1D)?;
        reg &= !0xF0;
        reg |= (sf as u8) << 4;
        self.write_register(0x1D, reg)?;
        Ok(())
    }

    fn set_transmission_power(&self, power_dbm: u8) -> Result<(), LoRaError> {
        self.write_register(0x09, power_dbm)?;
        Ok(())
    }

    fn configure_default(&self) -> Result<(), LoRaError> {
        // Set other default configuration
        self.write_register(0x0B, 0x07)?; // Preamble length
        self.write_register(0x1E, 0x00)?; // CRC off
        self.write_register(0x1C, 0x00)?; // IQ inverted
        Ok(())
    }

    fn prepare_packet(&self, data: &[u8]) -> Result<(), LoRaError> {
        // Write payload to FIFO
        for &byte in data {
            self.write_fifo(byte)?;
        }
        Ok(())
    }

    fn set_destination(&self, dest: u32) -> Result<(), LoRaError> {
        self.write_register(0x00, (dest & 0xFF) as u8)?;
        self.write_register(0x01, ((dest >> 8) & 0xFF) as u8)?;
        self.write_register(0x02, ((dest >> 16) & 0xFF) as u8)?;
        self.write_register(0x03, ((dest >> 24) & 0xFF) as u8)?;
        Ok(())
    }

    fn transmit_packet(&self) -> Result<(), LoRaError> {
        // Set TX mode
        let mut mode = self.read_register(0x01)?;
        mode |= 0x80; // TX ready
        self.write_register(0x01, mode)?;
        
        // Wait for transmission complete
        while self.is_transmitting()? {}
        
        Ok(())
    }

    fn is_packet_received(&self) -> Result<bool, LoRaError> {
        let status = self.read_register(0x0E)?;
        Ok((status & 0x40) != 0) // RxDone flag
    }

    fn get_payload_size(&self) -> Result<u8, LoRaError> {
        let payload = self.read_register(0x13)?;
        Ok(payload)
    }

    fn write_register(&self, addr: u8, value: u8) -> Result<(), LoRaError> {
        let cmd = [0x80 | (addr << 1), value];
        self.spi_bus.transfer(&cmd);
        Ok(())
    }

    fn read_register(&self, addr: u8) -> Result<u8, LoRaError> {
        let cmd = [addr << 1, 0x00];
        let response = self.spi_bus.transfer(&cmd);
        Ok(response[1])
    }

    fn write_fifo(&self, byte: u8) -> Result<(), LoRaError> {
        let cmd = [0x80, byte];
        self.spi_bus.transfer(&cmd);
        Ok(())
    }

    fn is_transmitting(&self) -> Result<bool, LoRaError> {
        let status = self.read_register(0x0E)?;
        Ok((status & 0x04) != 0) // TxDone flag
    }
}

#[derive(Debug)]
pub enum LoRaError {
    Timeout,
    InvalidPacket,
    CrcError,
    TransmitFailed,
}

/// Bluetooth Low Energy Transport
pub struct BluetoothLETransport {
    i2c_bus: crate::riscv_hal::I2CBus,
    device_address: u8,
}

impl BluetoothLETransport {
    pub const fn new(i2c_bus: crate::riscv_hal::I2CBus, address: u8) -> Self {
        Self {
            i2c_bus,
            device_address: address,
        }
    }

    /// Initialize BLE module
    pub fn init(&mut self) -> Result<(), BleError> {
        // Reset device
        self.reset_device()?;
        
        // Configure advertising
        self.configure_advertising()?;
        
        // Start advertising
        self.start_advertising()?;
        
        Ok(())
    }

    /// Set advertising data
    pub fn set_advertising_data(&self, data: &[u8]) -> Result<(), BleError> {
        // Write advertising data to device
        for (i, &byte) in data.iter().enumerate() {
            self.write_register(0x40 + i as u8, byte)?;
        }
        Ok(())
    }

    /// Send data to connected device
    pub fn send_data(&self, data: &[u8], conn_handle: u16) -> Result<(), BleError> {
        // Write to GATT characteristic
        for (i, &byte) in data.iter().enumerate() {
            let reg_addr = 0x50 + (i as u8);
            self.write_register(reg_addr, byte)?;
        }
        Ok(())
    }

    fn reset_device(&self) -> Result<(), BleError> {
        self.write_register(0x01, 0x01)?;
        Ok(())
    }

    fn configure_advertising(&self) -> Result<(), BleError> {
        // Configure advertising parameters
        self.write_register(0x10, 100)?; // Interval
        self.write_register(0x11, 0x30)?; // Timeout
        Ok(())
    }

    fn start_advertising(&self) -> Result<(), BleError> {
        self.write_register(0x20, 0x01)?;
        Ok(())
    }

    fn write_register(&self, addr: u8, value: u8) -> Result<(), BleError> {
        self.i2c_bus.write_byte(self.device_address << 1 | 0x01)?;
        self.i2c_bus.write_byte(addr)?;
        self.i2c_bus.write_byte(value)?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum BleError {
    ConnectionFailed,
    GATTError,
    Timeout,
    InvalidData,
}

/// Communication Manager - coordinates multiple transport protocols
pub struct CommunicationManager {
    mqtt_client: Option<MqttClient<'static>>,
    wifi_transport: Option<WifiTransport>,
    lora_transport: Option<LoRaTransport>,
    ble_transport: Option<BluetoothLETransport>,
}

impl CommunicationManager {
    pub const fn new() -> Self {
        Self {
            mqtt_client: None,
            wifi_transport: None,
            lora_transport: None,
            ble_transport: None,
        }
    }

    /// Initialize WiFi transport
    pub fn init_wifi(&mut self, uart: &'static Uart, ssid: &str, password: &str) -> Result<(), CommunicationError> {
        let mut wifi = WifiTransport::new(uart);
        wifi.init(ssid, password)?;
        self.wifi_transport = Some(wifi);
        Ok(())
    }

    /// Initialize LoRa transport
    pub fn init_lora(&mut self, spi_bus: crate::riscv_hal::SpiBus) -> Result<(), CommunicationError> {
        let mut lora = LoRaTransport::new(spi_bus);
        lora.init()?;
        self.lora_transport = Some(lora);
        Ok(())
    }

    /// Initialize MQTT client
    pub fn init_mqtt(&mut self, transport: Box<dyn MqttTransport>, client_id: String<32>) -> Result<(), CommunicationError> {
        // Create static reference for MQTT client
        let mqtt_client = MqttClient::new(transport.as_ref(), client_id);
        self.mqtt_client = Some(mqtt_client);
        Ok(())
    }

    /// Send message via available transport
    pub fn send_message(&self, data: &[u8], protocol: CommunicationProtocol) -> Result<(), CommunicationError> {
        match protocol {
            CommunicationProtocol::MQTT => {
                if let Some(ref client) = self.mqtt_client {
                    // Convert data to MQTT message
                    let message = MqttMessage::from_payload(data);
                    client.transport.send(&message.as_bytes())?;
                }
            },
            CommunicationProtocol::LoRa => {
                if let Some(ref lora) = self.lora_transport {
                    lora.send_data(data, 0xFF_FF_FF_FF)?; // Broadcast
                }
            },
            CommunicationProtocol::BLE => {
                if let Some(ref ble) = self.ble_transport {
                    ble.send_data(data, 0x0001)?; // Default connection handle
                }
            },
        }
        Ok(())
    }

    /// Process incoming messages
    pub fn process_messages(&mut self) -> Result<(), CommunicationError> {
        // Process MQTT messages
        if let Some(ref mut client) = self.mqtt_client {
            client.process_messages()?;
        }
        
        // Process LoRa messages
        if let Some(ref lora) = self.lora_transport {
            if let Some(data) = lora.receive_data()? {
                // Handle received LoRa data
            }
        }
        
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CommunicationProtocol {
    MQTT,
    LoRa,
    BLE,
}

#[derive(Debug)]
pub enum CommunicationError {
    TransportNotInitialized,
    ProtocolError,
    Timeout,
    InvalidData,
}