//! Network IPC for Remote Process Communication
//! 
//! This module implements network-based IPC mechanisms for communication
//! between processes on different systems or remote hosts.

use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use spin::{Mutex, RwLock};
use bitflags::bitflags;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{IpcResult, IpcError};

/// Network address types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressType {
    IPv4 = 0,
    IPv6 = 1,
    Unix = 2,
}

/// Network endpoint for IPC
#[derive(Debug, Clone)]
pub struct NetworkEndpoint {
    pub address_type: AddressType,
    pub address: Vec<u8>, // IP address or Unix socket path
    pub port: u16,        // For IP-based addresses
    pub protocol: NetworkProtocol,
}

/// Network protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NetworkProtocol {
    TCP = 0,
    UDP = 1,
    UnixStream = 2,
    UnixDatagram = 3,
}

/// Network IPC connection handle
#[derive(Debug, Clone, Copy)]
pub struct NetworkIpcHandle {
    pub id: u32,
}

impl NetworkIpcHandle {
    pub const fn new(id: u32) -> Self {
        Self { id }
    }
}

/// Network IPC flags
bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NetworkIpcFlags: u32 {
        const RELIABLE     = 1 << 0;   // Reliable delivery
        const ORDERED      = 1 << 1;   // Ordered delivery
        const BROADCAST    = 1 << 2;   // Broadcast support
        const MULTICAST    = 1 << 3;   // Multicast support
        const KEEP_ALIVE   = 1 << 4;   // Keep connections alive
        const NO_DELAY     = 1 << 5;   // Disable Nagle's algorithm
        const NON_BLOCKING = 1 << 6;   // Non-blocking I/O
        const SECURE       = 1 << 7;   // Encrypted connection
    }
}

/// Network message structure
#[derive(Debug, Clone)]
pub struct NetworkMessage {
    pub data: Vec<u8>,
    pub destination: Option<NetworkEndpoint>,
    pub message_id: u64,
    pub timestamp: u64,
    pub hop_count: u8,
    pub priority: u32,
}

/// Network connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    Disconnected = 0,
    Connecting = 1,
    Connected = 2,
    Listening = 3,
    Error = 4,
}

/// Network connection information
#[derive(Debug)]
pub struct NetworkConnection {
    pub id: u32,
    pub handle: NetworkIpcHandle,
    pub local_endpoint: NetworkEndpoint,
    pub remote_endpoint: NetworkEndpoint,
    pub state: AtomicU32, // ConnectionState as atomic
    pub protocol: NetworkProtocol,
    pub flags: NetworkIpcFlags,
    pub created_at: u64,
    pub last_activity: AtomicU64,
    pub bytes_sent: AtomicU64,
    pub bytes_received: AtomicU64,
    pub messages_sent: AtomicU64,
    pub messages_received: AtomicU64,
    pub connection_quality: u32, // 0-100
}

/// Network server for accepting connections
#[derive(Debug)]
pub struct NetworkServer {
    pub id: u32,
    pub endpoint: NetworkEndpoint,
    pub protocol: NetworkProtocol,
    pub max_connections: usize,
    pub active_connections: Mutex<Vec<NetworkConnection>>,
    pub listening: AtomicU32, // 0/1
    pub server_statistics: ServerStatistics,
}

/// Server statistics
#[derive(Debug, Clone, Default)]
pub struct ServerStatistics {
    pub total_connections: u64,
    pub active_connections: u32,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub messages_processed: u64,
    pub connection_timeouts: u32,
    pub errors: u32,
}

/// Network client for initiating connections
#[derive(Debug)]
pub struct NetworkClient {
    pub id: u32,
    pub server_endpoint: NetworkEndpoint,
    pub connection: Option<NetworkConnection>,
    pub client_statistics: ClientStatistics,
}

/// Client statistics
#[derive(Debug, Clone, Default)]
pub struct ClientStatistics {
    pub connection_attempts: u64,
    pub successful_connections: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub messages_sent: u64,
    pub messages_received: u64,
    pub reconnections: u32,
    pub errors: u32,
}

/// Network packet information
#[derive(Debug, Clone)]
pub struct NetworkPacket {
    pub source: NetworkEndpoint,
    pub destination: NetworkEndpoint,
    pub data: Vec<u8>,
    pub protocol: NetworkProtocol,
    pub ttl: u8,
    pub timestamp: u64,
    pub packet_id: u64,
}

/// Network routing table entry
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub destination: NetworkEndpoint,
    pub next_hop: NetworkEndpoint,
    pub metric: u32,
    pub interface: u32,
    pub expires_at: u64,
}

/// Network interface information
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    pub id: u32,
    pub name: Vec<u8>,
    pub address: NetworkEndpoint,
    pub mtu: u32,
    pub is_up: bool,
    pub is_loopback: bool,
    pub is_broadcast: bool,
    pub interface_statistics: InterfaceStatistics,
}

/// Interface statistics
#[derive(Debug, Clone, Default)]
pub struct InterfaceStatistics {
    pub packets_sent: u64,
    pub packets_received: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub errors: u32,
    pub dropped_packets: u64,
}

/// Network manager for handling network IPC
#[derive(Debug)]
pub struct NetworkManager {
    pub connections: RwLock<BTreeMap<u32, NetworkConnection>>,
    pub servers: RwLock<BTreeMap<u32, NetworkServer>>,
    pub clients: RwLock<BTreeMap<u32, NetworkClient>>,
    pub interfaces: RwLock<Vec<NetworkInterface>>,
    pub routing_table: RwLock<Vec<RouteEntry>>,
    pub pending_messages: Mutex<Vec<NetworkMessage>>,
    pub network_statistics: NetworkStatistics,
    pub next_connection_id: AtomicU32,
    pub next_server_id: AtomicU32,
    pub next_client_id: AtomicU32,
}

/// Network-wide statistics
#[derive(Debug, Clone, Default)]
pub struct NetworkStatistics {
    pub total_connections: u64,
    pub active_connections: u32,
    pub total_messages: u64,
    pub dropped_messages: u64,
    pub network_errors: u32,
    pub routing_entries: u32,
    pub active_servers: u32,
    pub active_clients: u32,
}

impl NetworkManager {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(BTreeMap::new()),
            servers: RwLock::new(BTreeMap::new()),
            clients: RwLock::new(BTreeMap::new()),
            interfaces: RwLock::new(Vec::new()),
            routing_table: RwLock::new(Vec::new()),
            pending_messages: Mutex::new(Vec::new()),
            network_statistics: NetworkStatistics::default(),
            next_connection_id: AtomicU32::new(1),
            next_server_id: AtomicU32::new(1),
            next_client_id: AtomicU32::new(1),
        }
    }

    /// Create a network server
    pub fn create_server(&self, endpoint: NetworkEndpoint, protocol: NetworkProtocol, max_connections: usize) -> IpcResult<u32> {
        let id = self.next_server_id.fetch_add(1, Ordering::SeqCst);
        
        let server = NetworkServer {
            id,
            endpoint,
            protocol,
            max_connections,
            active_connections: Mutex::new(Vec::new()),
            listening: AtomicU32::new(0),
            server_statistics: ServerStatistics::default(),
        };

        let mut servers = self.servers.write();
        servers.insert(id, server);
        
        self.network_statistics.active_servers += 1;
        
        log::debug!("Created network server {} on {:?}", id, endpoint);
        Ok(id)
    }

    /// Start listening on server
    pub fn start_listening(&self, server_id: u32) -> IpcResult<()> {
        let mut servers = self.servers.write();
        
        if let Some(server) = servers.get_mut(&server_id) {
            server.listening.store(1, Ordering::SeqCst);
            
            // In real implementation, would bind socket and start accepting connections
            log::debug!("Server {} started listening on {:?}", server_id, server.endpoint);
            
            Ok(())
        } else {
            Err(IpcError::InvalidHandle)
        }
    }

    /// Stop listening on server
    pub fn stop_listening(&self, server_id: u32) -> IpcResult<()> {
        let mut servers = self.servers.write();
        
        if let Some(server) = servers.get_mut(&server_id) {
            server.listening.store(0, Ordering::SeqCst);
            
            // Close all active connections
            let mut connections = server.active_connections.lock();
            for connection in connections.iter_mut() {
                connection.state.store(ConnectionState::Disconnected as u32, Ordering::SeqCst);
            }
            
            log::debug!("Server {} stopped listening", server_id);
            Ok(())
        } else {
            Err(IpcError::InvalidHandle)
        }
    }

    /// Create a network client
    pub fn create_client(&self, server_endpoint: NetworkEndpoint) -> IpcResult<u32> {
        let id = self.next_client_id.fetch_add(1, Ordering::SeqCst);
        
        let client = NetworkClient {
            id,
            server_endpoint,
            connection: None,
            client_statistics: ClientStatistics::default(),
        };

        let mut clients = self.clients.write();
        clients.insert(id, client);
        
        log::debug!("Created network client {} connecting to {:?}", id, server_endpoint);
        Ok(id)
    }

    /// Connect client to server
    pub fn connect_client(&self, client_id: u32) -> IpcResult<NetworkIpcHandle> {
        let mut clients = self.clients.write();
        
        if let Some(client) = clients.get_mut(&client_id) {
            let connection_id = self.next_connection_id.fetch_add(1, Ordering::SeqCst);
            
            // Create connection
            let connection = NetworkConnection {
                id: connection_id,
                handle: NetworkIpcHandle::new(connection_id),
                local_endpoint: self.get_local_endpoint(), // Would get actual local address
                remote_endpoint: client.server_endpoint.clone(),
                state: AtomicU32::new(ConnectionState::Connecting as u32),
                protocol: NetworkProtocol::TCP, // Default protocol
                flags: NetworkIpcFlags::RELIABLE | NetworkIpcFlags::ORDERED,
                created_at: 0, // Would set actual timestamp
                last_activity: AtomicU64::new(0),
                bytes_sent: AtomicU64::new(0),
                bytes_received: AtomicU64::new(0),
                messages_sent: AtomicU64::new(0),
                messages_received: AtomicU64::new(0),
                connection_quality: 100, // Start with good quality
            };

            let handle = connection.handle;
            client.connection = Some(connection);
            client.client_statistics.connection_attempts += 1;
            client.client_statistics.successful_connections += 1;

            // Add to global connections
            let mut connections = self.connections.write();
            connections.insert(connection_id, client.connection.as_ref().unwrap().clone());

            self.network_statistics.total_connections += 1;
            self.network_statistics.active_connections += 1;

            log::debug!("Client {} connected to server", client_id);
            Ok(handle)
        } else {
            Err(IpcError::InvalidHandle)
        }
    }

    /// Send message over network connection
    pub fn send_message(&self, handle: NetworkIpcHandle, data: &[u8], destination: Option<NetworkEndpoint>) -> IpcResult<usize> {
        let connections = self.connections.read();
        
        if let Some(connection) = connections.get(&handle.id) {
            let bytes_sent = data.len();
            
            // Update connection statistics
            connection.bytes_sent.fetch_add(bytes_sent as u64, Ordering::SeqCst);
            connection.messages_sent.fetch_add(1, Ordering::SeqCst);
            connection.last_activity.store(0, Ordering::SeqCst); // Would set actual timestamp
            
            // Update global statistics
            self.network_statistics.total_messages += 1;
            
            log::debug!("Sent {} bytes over connection {}", bytes_sent, handle.id);
            Ok(bytes_sent)
        } else {
            Err(IpcError::InvalidHandle)
        }
    }

    /// Receive message from network connection
    pub fn receive_message(&self, handle: NetworkIpcHandle, buffer: &mut [u8]) -> IpcResult<usize> {
        let connections = self.connections.read();
        
        if let Some(connection) = connections.get(&handle.id) {
            // In real implementation, would read from actual network socket
            let bytes_received = buffer.len().min(1024); // Mock data
            
            // Update connection statistics
            connection.bytes_received.fetch_add(bytes_received as u64, Ordering::SeqCst);
            connection.messages_received.fetch_add(1, Ordering::SeqCst);
            connection.last_activity.store(0, Ordering::SeqCst); // Would set actual timestamp
            
            // Fill buffer with mock data
            for i in 0..bytes_received {
                buffer[i] = (i % 256) as u8;
            }
            
            log::debug!("Received {} bytes from connection {}", bytes_received, handle.id);
            Ok(bytes_received)
        } else {
            Err(IpcError::InvalidHandle)
        }
    }

    /// Close network connection
    pub fn close_connection(&self, handle: NetworkIpcHandle) -> IpcResult<()> {
        let mut connections = self.connections.write();
        
        if let Some(connection) = connections.remove(&handle.id) {
            connection.state.store(ConnectionState::Disconnected as u32, Ordering::SeqCst);
            
            // Remove from any server's active connections
            let mut servers = self.servers.write();
            for server in servers.values_mut() {
                let mut active_connections = server.active_connections.lock();
                active_connections.retain(|c| c.id != connection.id);
            }
            
            // Remove from any client's connection
            let mut clients = self.clients.write();
            for client in clients.values_mut() {
                if let Some(ref conn) = client.connection {
                    if conn.id == connection.id {
                        client.connection = None;
                        break;
                    }
                }
            }
            
            self.network_statistics.active_connections -= 1;
            
            log::debug!("Closed connection {}", handle.id);
            Ok(())
        } else {
            Err(IpcError::InvalidHandle)
        }
    }

    /// Add network interface
    pub fn add_interface(&self, name: &[u8], address: NetworkEndpoint, mtu: u32) -> IpcResult<u32> {
        let interface_id = self.interfaces.read().len() as u32;
        
        let interface = NetworkInterface {
            id: interface_id,
            name: name.to_vec(),
            address,
            mtu,
            is_up: true,
            is_loopback: address.address_type == AddressType::Unix, // Unix sockets are loopback-like
            is_broadcast: address.address_type == AddressType::IPv4,
            interface_statistics: InterfaceStatistics::default(),
        };

        self.interfaces.write().push(interface);
        
        log::debug!("Added network interface {}: {}", interface_id, String::from_utf8_lossy(name));
        Ok(interface_id)
    }

    /// Add route to routing table
    pub fn add_route(&self, destination: NetworkEndpoint, next_hop: NetworkEndpoint, metric: u32) -> IpcResult<()> {
        let mut routing_table = self.routing_table.write();
        
        let entry = RouteEntry {
            destination,
            next_hop,
            metric,
            interface: 0, // Would determine correct interface
            expires_at: 0, // Would set expiration time
        };

        routing_table.push(entry);
        self.network_statistics.routing_entries += 1;
        
        log::debug!("Added route to {:?}", destination);
        Ok(())
    }

    /// Send broadcast message
    pub fn broadcast_message(&self, data: &[u8], network: NetworkEndpoint) -> IpcResult<usize> {
        // Find all connections on the specified network
        let connections = self.connections.read();
        let mut sent_count = 0;
        
        for connection in connections.values() {
            if connection.remote_endpoint.address_type == network.address_type {
                // Send to connection (broadcast simulation)
                let bytes = self.send_message(connection.handle, data, None)?;
                sent_count += bytes;
            }
        }
        
        log::debug!("Broadcasted {} bytes to {} connections", sent_count, connections.len());
        Ok(sent_count)
    }

    /// Get connection state
    pub fn get_connection_state(&self, handle: NetworkIpcHandle) -> IpcResult<ConnectionState> {
        let connections = self.connections.read();
        
        if let Some(connection) = connections.get(&handle.id) {
            let state_value = connection.state.load(Ordering::SeqCst);
            Ok(unsafe { core::mem::transmute(state_value as u8) })
        } else {
            Err(IpcError::InvalidHandle)
        }
    }

    /// Get network statistics
    pub fn get_network_statistics(&self) -> NetworkStatistics {
        // Update statistics from various sources
        let connections = self.connections.read();
        self.network_statistics.active_connections = connections.len() as u32;
        self.network_statistics.total_connections = connections.len() as u64;
        
        let servers = self.servers.read();
        self.network_statistics.active_servers = servers.len() as u32;
        
        self.network_statistics.clone()
    }

    /// Get interface statistics
    pub fn get_interface_statistics(&self, interface_id: u32) -> IpcResult<InterfaceStatistics> {
        let interfaces = self.interfaces.read();
        
        if let Some(interface) = interfaces.get(interface_id as usize) {
            Ok(interface.interface_statistics.clone())
        } else {
            Err(IpcError::InvalidHandle)
        }
    }

    /// Ping remote endpoint
    pub fn ping(&self, endpoint: NetworkEndpoint, timeout_ns: u64) -> IpcResult<u64> {
        // Mock ping implementation
        // In real implementation, would send ICMP echo request and measure response time
        
        log::debug!("Pinging {:?}", endpoint);
        
        // Simulate network latency
        let latency_ns = 1000_000; // 1ms simulated latency
        core::thread::yield_now(); // Simulate network delay
        
        Ok(latency_ns)
    }

    /// Check if endpoint is reachable
    pub fn is_reachable(&self, endpoint: NetworkEndpoint) -> IpcResult<bool> {
        // Mock reachability check
        // In real implementation, would use routing table and network probes
        
        match endpoint.address_type {
            AddressType::IPv4 | AddressType::IPv6 => {
                // Check if address is in valid range
                if !endpoint.address.is_empty() {
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            AddressType::Unix => {
                // Unix sockets are always reachable on local system
                Ok(true)
            }
        }
    }

    /// Get local endpoint for this system
    fn get_local_endpoint(&self) -> NetworkEndpoint {
        NetworkEndpoint {
            address_type: AddressType::IPv4,
            address: vec![127, 0, 0, 1], // localhost
            port: 0, // Random port
            protocol: NetworkProtocol::TCP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_server_creation() {
        let manager = NetworkManager::new();
        
        let endpoint = NetworkEndpoint {
            address_type: AddressType::IPv4,
            address: vec![0, 0, 0, 0], // Any address
            port: 8080,
            protocol: NetworkProtocol::TCP,
        };
        
        let server_id = manager.create_server(endpoint, NetworkProtocol::TCP, 100).unwrap();
        assert!(manager.start_listening(server_id).is_ok());
        
        let servers = manager.servers.read();
        assert!(servers.contains_key(&server_id));
    }

    #[test]
    fn test_network_client_connection() {
        let manager = NetworkManager::new();
        
        let server_endpoint = NetworkEndpoint {
            address_type: AddressType::IPv4,
            address: vec![192, 168, 1, 100],
            port: 8080,
            protocol: NetworkProtocol::TCP,
        };
        
        let client_id = manager.create_client(server_endpoint).unwrap();
        let handle = manager.connect_client(client_id).unwrap();
        
        assert_eq!(handle.id, 1); // First connection gets ID 1
        
        // Test sending message
        let data = b"Hello, Network!";
        assert_eq!(manager.send_message(handle, data, None).unwrap(), data.len());
    }

    #[test]
    fn test_network_message_send_receive() {
        let manager = NetworkManager::new();
        
        // Create server and client
        let server_endpoint = NetworkEndpoint {
            address_type: AddressType::IPv4,
            address: vec![127, 0, 0, 1],
            port: 8080,
            protocol: NetworkProtocol::TCP,
        };
        
        let server_id = manager.create_server(server_endpoint, NetworkProtocol::TCP, 1).unwrap();
        manager.start_listening(server_id).unwrap();
        
        let client_id = manager.create_client(server_endpoint).unwrap();
        let handle = manager.connect_client(client_id).unwrap();
        
        // Send and receive message
        let data = b"Test message";
        assert_eq!(manager.send_message(handle, data, None).unwrap(), data.len());
        
        let mut buffer = vec![0u8; data.len()];
        assert_eq!(manager.receive_message(handle, &mut buffer).unwrap(), data.len());
        assert_eq!(&buffer, data);
    }

    #[test]
    fn test_network_broadcast() {
        let manager = NetworkManager::new();
        
        // Create multiple connections would be needed for meaningful broadcast test
        // For now, test the broadcast mechanism
        
        let broadcast_endpoint = NetworkEndpoint {
            address_type: AddressType::IPv4,
            address: vec![255, 255, 255, 255], // Broadcast address
            port: 8080,
            protocol: NetworkProtocol::UDP,
        };
        
        let data = b"Broadcast message";
        let bytes_sent = manager.broadcast_message(data, broadcast_endpoint).unwrap();
        
        // In mock implementation, might return 0 if no connections exist
        assert!(bytes_sent >= 0);
    }

    #[test]
    fn test_network_interface_management() {
        let manager = NetworkManager::new();
        
        let interface_endpoint = NetworkEndpoint {
            address_type: AddressType::IPv4,
            address: vec![192, 168, 1, 1],
            port: 0,
            protocol: NetworkProtocol::TCP,
        };
        
        let interface_id = manager.add_interface(b"eth0", interface_endpoint, 1500).unwrap();
        assert_eq!(interface_id, 0); // First interface
        
        let stats = manager.get_interface_statistics(interface_id).unwrap();
        assert_eq!(stats.packets_sent, 0);
        assert_eq!(stats.packets_received, 0);
    }

    #[test]
    fn test_network_reachability() {
        let manager = NetworkManager::new();
        
        let ipv4_endpoint = NetworkEndpoint {
            address_type: AddressType::IPv4,
            address: vec![192, 168, 1, 100],
            port: 80,
            protocol: NetworkProtocol::TCP,
        };
        
        let unix_endpoint = NetworkEndpoint {
            address_type: AddressType::Unix,
            address: b"/tmp/test_socket".to_vec(),
            port: 0,
            protocol: NetworkProtocol::UnixStream,
        };
        
        // Test IPv4 reachability (mock implementation)
        assert!(manager.is_reachable(ipv4_endpoint).unwrap());
        
        // Test Unix socket reachability
        assert!(manager.is_reachable(unix_endpoint).unwrap());
    }
}
