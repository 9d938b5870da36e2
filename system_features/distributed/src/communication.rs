//! Network communication and message passing infrastructure
//!
//! This module provides the underlying network communication layer
//! for the distributed computing framework.

use std::collections::{HashMap, VecDeque};
use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::{broadcast, mpsc, oneshot, RwLock};
use tokio::time::{interval, timeout};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::cluster::{Cluster, NodeId, NodeStatus};

/// Network protocol version
pub const PROTOCOL_VERSION: ProtocolVersion = ProtocolVersion::V1;

/// Supported protocol versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolVersion {
    V1 = 1,
    V2 = 2,
}

/// Message types for network communication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MessageType {
    /// Heartbeat for node liveness
    Heartbeat,
    /// Task assignment message
    TaskAssignment,
    /// Task result message
    TaskResult,
    /// Control message
    Control,
    /// Data transfer message
    Data,
    /// Discovery message
    Discovery,
    /// Authentication message
    Auth,
    /// Error message
    Error,
    /// Acknowledge message
    Ack,
    /// Synchronization message
    Sync,
    /// Custom application message
    Custom(String),
}

/// Network message structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: Uuid,
    pub message_type: MessageType,
    pub source_node: NodeId,
    pub target_node: Option<NodeId>,
    pub timestamp: SystemTime,
    pub ttl: u8,
    pub payload: Vec<u8>,
    pub metadata: HashMap<String, String>,
    pub priority: MessagePriority,
    pub protocol_version: ProtocolVersion,
}

/// Message priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessagePriority {
    Low = 0,
    Normal = 1,
    High = 2,
    Critical = 3,
}

/// Network connection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Authenticating,
    Active,
    Closing,
    Failed,
}

/// Network connection handle
#[derive(Debug)]
pub struct NetworkConnection {
    pub connection_id: Uuid,
    pub remote_node: NodeId,
    pub local_address: SocketAddr,
    pub remote_address: SocketAddr,
    pub state: ConnectionState,
    pub created_at: SystemTime,
    pub last_activity: SystemTime,
    pub message_count: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub protocol_version: ProtocolVersion,
    pub stream: Option<Arc<TcpStream>>,
}

/// Network client for outbound connections
#[derive(Debug)]
pub struct NetworkClient {
    client_id: Uuid,
    cluster: Arc<Cluster>,
    active_connections: Arc<RwLock<HashMap<NodeId, NetworkConnection>>>,
    connection_queue: Arc<RwLock<VecDeque<ConnectionRequest>>>,
    message_queue: Arc<RwLock<VecDeque<NetworkMessage>>>,
    
    // Performance metrics
    metrics: Arc<RwLock<ClientMetrics>>,
    
    // Configuration
    max_connections: usize,
    connection_timeout: Duration,
    message_timeout: Duration,
}

/// Connection request for outbound connections
#[derive(Debug, Clone)]
pub struct ConnectionRequest {
    pub target_node: NodeId,
    pub target_address: SocketAddr,
    pub timeout: Duration,
    pub priority: MessagePriority,
    pub callback: Option<oneshot::Sender<Result<NetworkConnection>>>,
}

/// Network message with delivery tracking
#[derive(Debug, Clone)]
pub struct NetworkMessage {
    pub message: Message,
    pub delivery_status: DeliveryStatus,
    pub retry_count: u32,
    pub max_retries: u32,
    pub created_at: SystemTime,
    pub next_retry: Option<SystemTime>,
}

/// Message delivery status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Failed,
    TimedOut,
}

/// Network server for inbound connections
#[derive(Debug)]
pub struct NetworkServer {
    server_id: Uuid,
    cluster: Arc<Cluster>,
    
    // Server state
    listener: Option<TcpListener>,
    udp_socket: Option<Arc<UdpSocket>>,
    server_address: SocketAddr,
    is_running: bool,
    
    // Connection management
    active_connections: Arc<RwLock<HashMap<Uuid, NetworkConnection>>>,
    connection_handlers: Arc<RwLock<Vec<mpsc::UnboundedReceiver<NetworkConnection>>>>,
    
    // Message processing
    message_queue: Arc<RwLock<VecDeque<NetworkMessage>>>,
    message_handlers: Arc<RwLock<Vec<mpsc::UnboundedReceiver<NetworkMessage>>>>,
    
    // Performance monitoring
    server_metrics: Arc<RwLock<ServerMetrics>>,
    
    // Control channels
    server_tx: mpsc::UnboundedSender<ServerCommand>,
    server_rx: mpsc::UnboundedReceiver<ServerCommand>,
}

/// Server control commands
#[derive(Debug)]
pub enum ServerCommand {
    /// Start listening for connections
    StartListening {
        address: SocketAddr,
        response: oneshot::Sender<Result<()>>,
    },
    /// Stop server
    Stop {
        response: oneshot::Sender<Result<()>>,
    },
    /// Get server status
    GetStatus {
        response: oneshot::Sender<ServerStatus>,
    },
    /// Broadcast message to all connected nodes
    Broadcast {
        message: Message,
        response: oneshot::Sender<Result<BroadcastResult>>,
    },
    /// Send message to specific node
    SendMessage {
        message: Message,
        target_node: NodeId,
        response: oneshot::Sender<Result<DeliveryStatus>>,
    },
}

/// Server status information
#[derive(Debug, Clone)]
pub struct ServerStatus {
    pub is_running: bool,
    pub server_address: Option<SocketAddr>,
    pub active_connections: usize,
    pub total_connections: u64,
    pub messages_processed: u64,
    pub average_latency: Duration,
    pub bandwidth_utilization: f64,
    pub error_rate: f64,
}

/// Broadcast operation result
#[derive(Debug, Clone)]
pub struct BroadcastResult {
    pub successful_deliveries: usize,
    pub failed_deliveries: usize,
    pub delivery_time: Duration,
    pub nodes_attempted: Vec<NodeId>,
}

/// Client performance metrics
#[derive(Debug, Clone, Default)]
pub struct ClientMetrics {
    pub messages_sent: u64,
    pub messages_received: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub connection_attempts: u64,
    pub successful_connections: u64,
    pub failed_connections: u64,
    pub average_latency: Duration,
    pub error_rate: f64,
    pub throughput_mbps: f64,
}

/// Server performance metrics
#[derive(Debug, Clone, Default)]
pub struct ServerMetrics {
    pub connections_accepted: u64,
    pub connections_active: u64,
    pub messages_processed: u64,
    pub bytes_transferred: u64,
    pub average_connection_duration: Duration,
    pub peak_connections: usize,
    pub bandwidth_mbps: f64,
    pub error_rate: f64,
    pub uptime: Duration,
}

impl NetworkServer {
    /// Create a new network server
    pub async fn new(cluster: Arc<Cluster>, config: &crate::cluster::ClusterConfig) -> Result<Self> {
        info!("Initializing network server");
        
        let server_id = Uuid::new_v4();
        let server_address = config.bind_address;
        
        let (server_tx, server_rx) = mpsc::unbounded_channel();
        
        Ok(Self {
            server_id,
            cluster,
            listener: None,
            udp_socket: None,
            server_address,
            is_running: false,
            active_connections: Arc::new(RwLock::new(HashMap::new())),
            connection_handlers: Arc::new(RwLock::new(Vec::new())),
            message_queue: Arc::new(RwLock::new(VecDeque::new())),
            message_handlers: Arc::new(RwLock::new(Vec::new())),
            server_metrics: Arc::new(RwLock::new(ServerMetrics::default())),
            server_tx,
            server_rx,
        })
    }
    
    /// Start the network server
    pub async fn start(&self) -> Result<()> {
        info!("Starting network server");
        
        self.is_running = true;
        
        // Start TCP listener
        let listener = TcpListener::bind(self.server_address).await?;
        self.listener = Some(listener);
        
        let server_address = self.server_address;
        info!("Network server listening on {}", server_address);
        
        // Start accepting connections
        let server = self.clone();
        tokio::spawn(async move {
            server.accept_connections_loop().await;
        });
        
        // Start message processing
        let server = self.clone();
        tokio::spawn(async move {
            server.message_processing_loop().await;
        });
        
        // Start metrics collection
        let server = self.clone();
        tokio::spawn(async move {
            server.metrics_collection_loop().await;
        });
        
        Ok(())
    }
    
    /// Stop the network server
    pub async fn stop(&self) -> Result<()> {
        info!("Stopping network server");
        
        self.is_running = false;
        
        // Close all connections
        {
            let mut connections = self.active_connections.write().await;
            for conn in connections.values_mut() {
                conn.state = ConnectionState::Closing;
            }
            connections.clear();
        }
        
        // Close listener
        if let Some(listener) = &self.listener {
            // Drop listener to stop accepting new connections
            let _ = listener;
        }
        
        info!("Network server stopped");
        Ok(())
    }
    
    /// Accept incoming connections loop
    async fn accept_connections_loop(&self) {
        if let Some(listener) = &self.listener {
            loop {
                match listener.accept().await {
                    Ok((stream, remote_addr)) => {
                        info!("Accepted connection from {}", remote_addr);
                        
                        let connection = NetworkConnection {
                            connection_id: Uuid::new_v4(),
                            remote_node: Uuid::new_v4(), // Would be determined during handshake
                            local_address: self.server_address,
                            remote_address: remote_addr,
                            state: ConnectionState::Connected,
                            created_at: SystemTime::now(),
                            last_activity: SystemTime::now(),
                            message_count: 0,
                            bytes_sent: 0,
                            bytes_received: 0,
                            protocol_version: PROTOCOL_VERSION,
                            stream: Some(Arc::new(stream)),
                        };
                        
                        // Store connection
                        {
                            let mut connections = self.active_connections.write().await;
                            connections.insert(connection.connection_id, connection);
                        }
                        
                        // Start handling this connection
                        let server = self.clone();
                        let connection_id = connection_id;
                        tokio::spawn(async move {
                            server.handle_connection(connection_id).await;
                        });
                    }
                    Err(e) => {
                        if self.is_running {
                            error!("Error accepting connection: {}", e);
                        }
                        break;
                    }
                }
                
                if !self.is_running {
                    break;
                }
            }
        }
    }
    
    /// Handle individual network connection
    async fn handle_connection(&self, connection_id: Uuid) {
        debug!("Handling connection {}", connection_id);
        
        // This would implement the full connection handling logic
        // including message reading/writing, protocol handling, etc.
        
        let mut buffer = vec![0u8; 4096];
        
        loop {
            if !self.is_running {
                break;
            }
            
            // Read message from stream
            let result = {
                let connections = self.active_connections.read().await;
                if let Some(connection) = connections.get(&connection_id) {
                    if let Some(stream) = &connection.stream {
                        stream.as_ref().read(&mut buffer).await
                    } else {
                        break;
                    }
                } else {
                    break;
                }
            };
            
            match result {
                Ok(n) if n > 0 => {
                    // Process received data
                    self.process_received_data(connection_id, &buffer[..n]).await;
                    
                    // Update connection activity
                    {
                        let mut connections = self.active_connections.write().await;
                        if let Some(connection) = connections.get_mut(&connection_id) {
                            connection.last_activity = SystemTime::now();
                            connection.bytes_received += n as u64;
                            connection.message_count += 1;
                        }
                    }
                }
                Ok(_) => {
                    debug!("Connection {} closed by peer", connection_id);
                    break;
                }
                Err(e) => {
                    error!("Error reading from connection {}: {}", connection_id, e);
                    break;
                }
            }
        }
        
        // Clean up connection
        {
            let mut connections = self.active_connections.write().await;
            connections.remove(&connection_id);
        }
        
        debug!("Connection {} handling completed", connection_id);
    }
    
    /// Process received data from connection
    async fn process_received_data(&self, connection_id: Uuid, data: &[u8]) {
        // This would deserialize the message and route it appropriately
        // For now, it's a placeholder implementation
        
        debug!("Processing {} bytes from connection {}", data.len(), connection_id);
        
        // Update metrics
        {
            let mut metrics = self.server_metrics.write().await;
            metrics.messages_processed += 1;
            metrics.bytes_transferred += data.len() as u64;
        }
    }
    
    /// Message processing loop
    async fn message_processing_loop(&self) {
        let mut interval = interval(Duration::from_millis(10));
        
        loop {
            interval.tick().await;
            
            if !self.is_running {
                break;
            }
            
            // Process pending messages from queue
            let mut messages = self.message_queue.write().await;
            while let Some(network_message) = messages.pop_front() {
                self.process_network_message(network_message).await;
            }
        }
    }
    
    /// Process individual network message
    async fn process_network_message(&self, network_message: NetworkMessage) {
        debug!("Processing network message: {:?}", network_message.message.message_type);
        
        match &network_message.message.message_type {
            MessageType::Heartbeat => {
                // Handle heartbeat message
                self.handle_heartbeat(&network_message.message).await;
            }
            MessageType::TaskAssignment => {
                // Handle task assignment
                self.handle_task_assignment(&network_message.message).await;
            }
            MessageType::TaskResult => {
                // Handle task result
                self.handle_task_result(&network_message.message).await;
            }
            MessageType::Control => {
                // Handle control message
                self.handle_control_message(&network_message.message).await;
            }
            MessageType::Data => {
                // Handle data message
                self.handle_data_message(&network_message.message).await;
            }
            MessageType::Discovery => {
                // Handle discovery message
                self.handle_discovery_message(&network_message.message).await;
            }
            MessageType::Error => {
                // Handle error message
                self.handle_error_message(&network_message.message).await;
            }
            _ => {
                // Handle other message types
                debug!("Unhandled message type: {:?}", network_message.message.message_type);
            }
        }
        
        // Update metrics
        {
            let mut metrics = self.server_metrics.write().await;
            metrics.messages_processed += 1;
        }
    }
    
    /// Handle heartbeat messages
    async fn handle_heartbeat(&self, message: &Message) {
        debug!("Received heartbeat from node {}", message.source_node);
        
        // Update node status in cluster
        if let Some(target_node) = message.target_node {
            let _ = self.cluster.update_node_status(target_node, NodeStatus::Active).await;
        }
    }
    
    /// Handle task assignment messages
    async fn handle_task_assignment(&self, message: &Message) {
        debug!("Received task assignment from node {}", message.source_node);
        // Implementation would handle task assignment logic
    }
    
    /// Handle task result messages
    async fn handle_task_result(&self, message: &Message) {
        debug!("Received task result from node {}", message.source_node);
        // Implementation would handle task result processing
    }
    
    /// Handle control messages
    async fn handle_control_message(&self, message: &Message) {
        debug!("Received control message from node {}", message.source_node);
        // Implementation would handle control operations
    }
    
    /// Handle data messages
    async fn handle_data_message(&self, message: &Message) {
        debug!("Received data message from node {}", message.source_node);
        // Implementation would handle data transfer
    }
    
    /// Handle discovery messages
    async fn handle_discovery_message(&self, message: &Message) {
        debug!("Received discovery message from node {}", message.source_node);
        // Implementation would handle node discovery
    }
    
    /// Handle error messages
    async fn handle_error_message(&self, message: &Message) {
        error!("Received error message from node {}: {}", 
               message.source_node, 
               String::from_utf8_lossy(&message.payload));
    }
    
    /// Metrics collection loop
    async fn metrics_collection_loop(&self) {
        let mut interval = interval(Duration::from_secs(10));
        
        loop {
            interval.tick().await;
            
            if !self.is_running {
                break;
            }
            
            // Update uptime
            {
                let mut metrics = self.server_metrics.write().await;
                metrics.uptime = Duration::from_secs(metrics.uptime.as_secs() + 10);
                
                // Calculate bandwidth utilization
                // This is a simplified calculation
                metrics.bandwidth_mbps = metrics.bytes_transferred as f64 / (1024.0 * 1024.0);
            }
        }
    }
    
    /// Broadcast message to all connected nodes
    pub async fn broadcast_message(&self, message: Message) -> Result<BroadcastResult> {
        debug!("Broadcasting message to all nodes");
        
        let start_time = Instant::now();
        let connections = self.active_connections.read().await;
        let nodes_attempted: Vec<NodeId> = connections.values().map(|c| c.remote_node).collect();
        
        let mut successful_deliveries = 0;
        let mut failed_deliveries = 0;
        
        for connection in connections.values() {
            let result = self.send_to_connection(connection.connection_id, &message).await;
            match result {
                Ok(_) => successful_deliveries += 1,
                Err(_) => failed_deliveries += 1,
            }
        }
        
        let delivery_time = start_time.elapsed();
        
        // Update metrics
        {
            let mut metrics = self.server_metrics.write().await;
            metrics.messages_processed += nodes_attempted.len() as u64;
        }
        
        Ok(BroadcastResult {
            successful_deliveries,
            failed_deliveries,
            delivery_time,
            nodes_attempted,
        })
    }
    
    /// Send message to specific connection
    async fn send_to_connection(&self, connection_id: Uuid, message: &Message) -> Result<()> {
        let connections = self.active_connections.read().await;
        
        if let Some(connection) = connections.get(&connection_id) {
            if let Some(stream) = &connection.stream {
                // Serialize message
                let serialized = bincode::serialize(message)?;
                
                // Send message
                stream.write_all(&serialized).await?;
                
                // Update metrics
                {
                    let mut connections = self.active_connections.write().await;
                    if let Some(conn) = connections.get_mut(&connection_id) {
                        conn.bytes_sent += serialized.len() as u64;
                        conn.message_count += 1;
                        conn.last_activity = SystemTime::now();
                    }
                }
                
                return Ok(());
            }
        }
        
        Err(anyhow::Error::msg("Connection not found or not writable"))
    }
    
    /// Get server status
    pub async fn get_status(&self) -> ServerStatus {
        let connections = self.active_connections.read().await;
        let metrics = self.server_metrics.read().await;
        
        ServerStatus {
            is_running: self.is_running,
            server_address: Some(self.server_address),
            active_connections: connections.len(),
            total_connections: metrics.connections_accepted,
            messages_processed: metrics.messages_processed,
            average_latency: metrics.average_connection_duration,
            bandwidth_utilization: metrics.bandwidth_mbps,
            error_rate: metrics.error_rate,
        }
    }
    
    /// Get active connections
    pub async fn get_active_connections(&self) -> Vec<NetworkConnection> {
        let connections = self.active_connections.read().await;
        connections.values().cloned().collect()
    }
    
    /// Subscribe to connection events
    pub fn subscribe_connections(&self) -> broadcast::Receiver<NetworkConnection> {
        // This would return a broadcast channel for connection events
        // Implementation would be added here
        broadcast::channel(100).1
    }
    
    /// Subscribe to message events
    pub fn subscribe_messages(&self) -> broadcast::Receiver<NetworkMessage> {
        // This would return a broadcast channel for message events
        // Implementation would be added here
        broadcast::channel(100).1
    }
}

impl NetworkClient {
    /// Create a new network client
    pub fn new(cluster: Arc<Cluster>, max_connections: usize) -> Self {
        info!("Creating network client");
        
        Self {
            client_id: Uuid::new_v4(),
            cluster,
            active_connections: Arc::new(RwLock::new(HashMap::new())),
            connection_queue: Arc::new(RwLock::new(VecDeque::new())),
            message_queue: Arc::new(RwLock::new(VecDeque::new())),
            metrics: Arc::new(RwLock::new(ClientMetrics::default())),
            max_connections,
            connection_timeout: Duration::from_secs(30),
            message_timeout: Duration::from_secs(60),
        }
    }
    
    /// Connect to remote node
    pub async fn connect_to(&self, target_node: NodeId, target_address: SocketAddr) -> Result<NetworkConnection> {
        debug!("Connecting to node {} at {}", target_node, target_address);
        
        // Check if connection already exists
        {
            let connections = self.active_connections.read().await;
            if let Some(existing) = connections.get(&target_node) {
                if existing.state == ConnectionState::Connected || existing.state == ConnectionState::Active {
                    return Ok(existing.clone());
                }
            }
        }
        
        // Attempt connection
        let stream = timeout(self.connection_timeout, TcpStream::connect(target_address))
            .await
            .map_err(|_| anyhow::Error::msg("Connection timeout"))??
            .map_err(|e| anyhow::Error::msg(format!("Connection failed: {}", e)))?;
        
        let connection = NetworkConnection {
            connection_id: Uuid::new_v4(),
            remote_node: target_node,
            local_address: stream.local_addr()?,
            remote_address: target_address,
            state: ConnectionState::Connected,
            created_at: SystemTime::now(),
            last_activity: SystemTime::now(),
            message_count: 0,
            bytes_sent: 0,
            bytes_received: 0,
            protocol_version: PROTOCOL_VERSION,
            stream: Some(Arc::new(stream)),
        };
        
        // Store connection
        {
            let mut connections = self.active_connections.write().await;
            connections.insert(target_node, connection.clone());
        }
        
        // Update metrics
        {
            let mut metrics = self.metrics.write().await;
            metrics.successful_connections += 1;
            metrics.connection_attempts += 1;
        }
        
        // Start handling connection
        let client = self.clone();
        let target_node_copy = target_node;
        tokio::spawn(async move {
            client.handle_outbound_connection(target_node_copy).await;
        });
        
        info!("Connected to node {} at {}", target_node, target_address);
        Ok(connection)
    }
    
    /// Send message to node
    pub async fn send_message(&self, message: Message, target_node: NodeId) -> Result<DeliveryStatus> {
        debug!("Sending message to node {}", target_node);
        
        // Find connection
        let connection = {
            let connections = self.active_connections.read().await;
            connections.get(&target_node).cloned()
        };
        
        if let Some(conn) = connection {
            if conn.state == ConnectionState::Connected || conn.state == ConnectionState::Active {
                // Send message directly
                let send_result = self.send_to_connection(conn.connection_id, &message).await;
                
                match send_result {
                    Ok(_) => {
                        // Update metrics
                        {
                            let mut metrics = self.metrics.write().await;
                            metrics.messages_sent += 1;
                            metrics.bytes_sent += message.payload.len() as u64;
                        }
                        
                        Ok(DeliveryStatus::Delivered)
                    }
                    Err(e) => {
                        error!("Failed to send message to node {}: {}", target_node, e);
                        Ok(DeliveryStatus::Failed)
                    }
                }
            } else {
                Ok(DeliveryStatus::Failed)
            }
        } else {
            // Queue message for when connection is established
            let network_message = NetworkMessage {
                message,
                delivery_status: DeliveryStatus::Pending,
                retry_count: 0,
                max_retries: 3,
                created_at: SystemTime::now(),
                next_retry: Some(SystemTime::now()),
            };
            
            {
                let mut queue = self.message_queue.write().await;
                queue.push_back(network_message);
            }
            
            Ok(DeliveryStatus::Pending)
        }
    }
    
    /// Send message to specific connection
    async fn send_to_connection(&self, connection_id: Uuid, message: &Message) -> Result<()> {
        let connections = self.active_connections.read().await;
        
        if let Some(connection) = connections.values().find(|c| c.connection_id == connection_id) {
            if let Some(stream) = &connection.stream {
                // Serialize message
                let serialized = bincode::serialize(message)?;
                
                // Send message
                stream.write_all(&serialized).await?;
                
                // Update connection metrics
                {
                    let mut connections = self.active_connections.write().await;
                    if let Some(conn) = connections.get_mut(&connection.remote_node) {
                        conn.bytes_sent += serialized.len() as u64;
                        conn.message_count += 1;
                        conn.last_activity = SystemTime::now();
                    }
                }
                
                return Ok(());
            }
        }
        
        Err(anyhow::Error::msg("Connection not found or not writable"))
    }
    
    /// Handle outbound connection
    async fn handle_outbound_connection(&self, target_node: NodeId) {
        debug!("Handling outbound connection to node {}", target_node);
        
        // This would implement the full outbound connection handling logic
        // including message reading, protocol handling, etc.
        
        // For now, it's a placeholder that handles connection cleanup
        tokio::time::sleep(Duration::from_secs(60)).await; // Simulate connection lifetime
        
        // Clean up connection
        {
            let mut connections = self.active_connections.write().await;
            connections.remove(&target_node);
        }
        
        debug!("Outbound connection to node {} closed", target_node);
    }
    
    /// Get client metrics
    pub async fn get_metrics(&self) -> ClientMetrics {
        self.metrics.read().await.clone()
    }
    
    /// Get active connections
    pub async fn get_active_connections(&self) -> Vec<NetworkConnection> {
        let connections = self.active_connections.read().await;
        connections.values().cloned().collect()
    }
    
    /// Disconnect from node
    pub async fn disconnect_from(&self, target_node: NodeId) -> Result<()> {
        debug!("Disconnecting from node {}", target_node);
        
        {
            let mut connections = self.active_connections.write().await;
            if let Some(connection) = connections.get_mut(&target_node) {
                connection.state = ConnectionState::Closing;
                connections.remove(&target_node);
            }
        }
        
        Ok(())
    }
    
    /// Check if connected to node
    pub async fn is_connected_to(&self, target_node: NodeId) -> bool {
        let connections = self.active_connections.read().await;
        connections.get(&target_node)
            .map(|c| c.state == ConnectionState::Connected || c.state == ConnectionState::Active)
            .unwrap_or(false)
    }
}

impl Display for MessagePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessagePriority::Low => write!(f, "Low"),
            MessagePriority::Normal => write!(f, "Normal"),
            MessagePriority::High => write!(f, "High"),
            MessagePriority::Critical => write!(f, "Critical"),
        }
    }
}

impl Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "Disconnected"),
            ConnectionState::Connecting => write!(f, "Connecting"),
            ConnectionState::Connected => write!(f, "Connected"),
            ConnectionState::Authenticating => write!(f, "Authenticating"),
            ConnectionState::Active => write!(f, "Active"),
            ConnectionState::Closing => write!(f, "Closing"),
            ConnectionState::Failed => write!(f, "Failed"),
        }
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Heartbeat => write!(f, "Heartbeat"),
            MessageType::TaskAssignment => write!(f, "TaskAssignment"),
            MessageType::TaskResult => write!(f, "TaskResult"),
            MessageType::Control => write!(f, "Control"),
            MessageType::Data => write!(f, "Data"),
            MessageType::Discovery => write!(f, "Discovery"),
            MessageType::Auth => write!(f, "Auth"),
            MessageType::Error => write!(f, "Error"),
            MessageType::Ack => write!(f, "Ack"),
            MessageType::Sync => write!(f, "Sync"),
            MessageType::Custom(custom) => write!(f, "Custom({})", custom),
        }
    }
}

impl Clone for NetworkServer {
    fn clone(&self) -> Self {
        Self {
            server_id: self.server_id,
            cluster: self.cluster.clone(),
            listener: self.listener.clone(),
            udp_socket: self.udp_socket.clone(),
            server_address: self.server_address,
            is_running: self.is_running,
            active_connections: self.active_connections.clone(),
            connection_handlers: self.connection_handlers.clone(),
            message_queue: self.message_queue.clone(),
            message_handlers: self.message_handlers.clone(),
            server_metrics: self.server_metrics.clone(),
            server_tx: self.server_tx.clone(),
            server_rx: self.server_rx.clone(),
        }
    }
}

impl Clone for NetworkClient {
    fn clone(&self) -> Self {
        Self {
            client_id: self.client_id,
            cluster: self.cluster.clone(),
            active_connections: self.active_connections.clone(),
            connection_queue: self.connection_queue.clone(),
            message_queue: self.message_queue.clone(),
            metrics: self.metrics.clone(),
            max_connections: self.max_connections,
            connection_timeout: self.connection_timeout,
            message_timeout: self.message_timeout,
        }
    }
}

// Utility functions for message creation

/// Create a heartbeat message
pub fn create_heartbeat(source_node: NodeId, target_node: Option<NodeId>) -> Message {
    Message {
        message_id: Uuid::new_v4(),
        message_type: MessageType::Heartbeat,
        source_node,
        target_node,
        timestamp: SystemTime::now(),
        ttl: 1,
        payload: vec![],
        metadata: HashMap::new(),
        priority: MessagePriority::Normal,
        protocol_version: PROTOCOL_VERSION,
    }
}

/// Create a task assignment message
pub fn create_task_assignment(source_node: NodeId, target_node: NodeId, task_data: Vec<u8>) -> Message {
    Message {
        message_id: Uuid::new_v4(),
        message_type: MessageType::TaskAssignment,
        source_node,
        target_node: Some(target_node),
        timestamp: SystemTime::now(),
        ttl: 1,
        payload: task_data,
        metadata: HashMap::new(),
        priority: MessagePriority::High,
        protocol_version: PROTOCOL_VERSION,
    }
}

/// Create a task result message
pub fn create_task_result(source_node: NodeId, target_node: NodeId, result_data: Vec<u8>) -> Message {
    Message {
        message_id: Uuid::new_v4(),
        message_type: MessageType::TaskResult,
        source_node,
        target_node: Some(target_node),
        timestamp: SystemTime::now(),
        ttl: 1,
        payload: result_data,
        metadata: HashMap::new(),
        priority: MessagePriority::High,
        protocol_version: PROTOCOL_VERSION,
    }
}

/// Create a control message
pub fn create_control_message(source_node: NodeId, target_node: Option<NodeId>, control_data: Vec<u8>) -> Message {
    Message {
        message_id: Uuid::new_v4(),
        message_type: MessageType::Control,
        source_node,
        target_node,
        timestamp: SystemTime::now(),
        ttl: 1,
        payload: control_data,
        metadata: HashMap::new(),
        priority: MessagePriority::Normal,
        protocol_version: PROTOCOL_VERSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_message_creation() {
        let node_id = Uuid::new_v4();
        let message = create_heartbeat(node_id, None);
        
        assert_eq!(message.message_type, MessageType::Heartbeat);
        assert_eq!(message.source_node, node_id);
        assert!(message.payload.is_empty());
    }
    
    #[test]
    fn test_message_serialization() {
        let node_id = Uuid::new_v4();
        let mut message = create_heartbeat(node_id, None);
        message.payload = b"test data".to_vec();
        
        let serialized = bincode::serialize(&message).unwrap();
        let deserialized: Message = bincode::deserialize(&serialized).unwrap();
        
        assert_eq!(message.message_id, deserialized.message_id);
        assert_eq!(message.payload, deserialized.payload);
    }
    
    #[test]
    fn test_connection_state_ordering() {
        assert!(ConnectionState::Active == ConnectionState::Active);
        assert_ne!(ConnectionState::Connected, ConnectionState::Failed);
    }
    
    #[test]
    fn test_message_priority_ordering() {
        assert!(MessagePriority::Critical > MessagePriority::High);
        assert!(MessagePriority::High > MessagePriority::Normal);
        assert!(MessagePriority::Normal > MessagePriority::Low);
    }
    
    #[test]
    fn test_delivery_status() {
        assert_eq!(DeliveryStatus::Pending, DeliveryStatus::Pending);
        assert_ne!(DeliveryStatus::Delivered, DeliveryStatus::Failed);
    }
    
    #[test]
    fn test_network_connection_structure() {
        let connection = NetworkConnection {
            connection_id: Uuid::new_v4(),
            remote_node: Uuid::new_v4(),
            local_address: "127.0.0.1:8080".parse().unwrap(),
            remote_address: "127.0.0.1:8081".parse().unwrap(),
            state: ConnectionState::Connected,
            created_at: SystemTime::now(),
            last_activity: SystemTime::now(),
            message_count: 0,
            bytes_sent: 0,
            bytes_received: 0,
            protocol_version: PROTOCOL_VERSION,
            stream: None,
        };
        
        assert_eq!(connection.state, ConnectionState::Connected);
        assert_eq!(connection.protocol_version, PROTOCOL_VERSION);
    }
    
    #[tokio::test]
    async fn test_network_server_creation() {
        let cluster = Arc::new(crate::cluster::Cluster::new(&crate::cluster::ClusterConfig::default()).await.unwrap());
        let server = NetworkServer::new(cluster, &crate::cluster::ClusterConfig::default()).await.unwrap();
        
        assert!(!server.server_id.is_nil());
        assert!(!server.is_running);
    }
    
    #[tokio::test]
    async fn test_network_client_creation() {
        let cluster = Arc::new(crate::cluster::Cluster::new(&crate::cluster::ClusterConfig::default()).await.unwrap());
        let client = NetworkClient::new(cluster, 10);
        
        assert_eq!(client.max_connections, 10);
        assert_eq!(client.connection_timeout, Duration::from_secs(30));
    }
}