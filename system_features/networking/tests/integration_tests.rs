// Test file for the MultiOS Network Stack
// This file verifies that all networking components are properly integrated

#[cfg(test)]
mod network_tests {
    use crate::*;

    #[test]
    fn test_network_stack_initialization() {
        let mut stack = NetworkStack::new();
        assert!(stack.start().is_ok());
    }

    #[test]
    fn test_socket_creation() {
        let tcp_socket = Socket::new(SocketType::Stream);
        let udp_socket = Socket::new(SocketType::Datagram);
        
        assert!(tcp_socket.is_ok());
        assert!(udp_socket.is_ok());
    }

    #[test]
    fn test_ip_address_parsing() {
        let ipv4_str = "192.168.1.100";
        let ip = IpAddress::from_str(ipv4_str);
        assert!(ip.is_ok());
        
        let parsed = ip.unwrap();
        assert_eq!(parsed.to_string(), "192.168.1.100");
    }

    #[test]
    fn test_tcp_protocol() {
        // Test TCP packet creation and parsing
        let tcp_packet = TcpPacket::new();
        tcp_packet.set_source_port(12345);
        tcp_packet.set_dest_port(80);
        tcp_packet.set_flags(TcpFlags::SYN);
        
        assert_eq!(tcp_packet.get_source_port(), 12345);
        assert_eq!(tcp_packet.get_dest_port(), 80);
        assert!(tcp_packet.has_flag(TcpFlags::SYN));
    }

    #[test]
    fn test_udp_protocol() {
        // Test UDP packet creation
        let udp_packet = UdpPacket::new();
        udp_packet.set_source_port(54321);
        udp_packet.set_dest_port(8080);
        udp_packet.set_data(b"Hello, UDP!");
        
        assert_eq!(udp_packet.get_source_port(), 54321);
        assert_eq!(udp_packet.get_dest_port(), 8080);
        assert_eq!(udp_packet.get_data(), b"Hello, UDP!");
    }

    #[test]
    fn test_icmp_protocol() {
        // Test ICMP packet creation
        let icmp_packet = IcmpPacket::new_echo_request(1234, 1, vec![1, 2, 3, 4]);
        
        assert_eq!(icmp_packet.packet_type, 8); // ICMP Echo Request
        assert_eq!(icmp_packet.identifier, 1234);
        assert_eq!(icmp_packet.sequence, 1);
    }

    #[test]
    fn test_dns_client() {
        let mut dns_client = DnsClient::new();
        assert!(dns_client.is_ok());
        
        // In a real environment, this would test actual DNS resolution
        // For testing, we'll just verify the client was created successfully
    }

    #[test]
    fn test_firewall_rules() {
        let mut firewall = Firewall::new();
        
        // Add a rule to allow HTTP traffic
        let rule = FirewallRule::new()
            .set_action(FirewallAction::Allow)
            .set_protocol(Protocol::Tcp)
            .set_port_range(80, 80)
            .set_direction(FirewallDirection::Inbound);
            
        firewall.add_rule(rule);
        
        assert_eq!(firewall.get_rule_count(), 1);
    }

    #[test]
    fn test_routing_table() {
        let mut routing_table = RoutingTable::new();
        
        // Add a route
        let route = Route::new()
            .set_destination("192.168.1.0/24")
            .set_next_hop("192.168.1.1")
            .set_interface("eth0")
            .set_metric(1);
            
        routing_table.add_route(route);
        
        assert_eq!(routing_table.get_route_count(), 1);
    }

    #[test]
    fn test_network_interface() {
        let interface = NetworkInterface::new("eth0");
        assert!(interface.is_ok());
        
        let mut iface = interface.unwrap();
        
        // Test IP address configuration
        let ip_result = iface.set_ip_address("192.168.1.10/24");
        assert!(ip_result.is_ok());
        
        let ip = iface.get_ip_address();
        assert!(ip.is_some());
    }

    #[test]
    fn test_security_features() {
        let mut security_manager = SecurityManager::new();
        
        // Test packet filtering
        let test_packet = TestPacket::new();
        let filter_result = security_manager.filter_packet(&test_packet);
        
        // Should not filter test packet
        assert!(filter_result.is_allow());
    }

    #[test]
    fn test_simulation_framework() {
        let mut simulator = NetworkSimulator::new();
        
        // Create a simple network topology
        let topology = Topology::new()
            .add_node("router1", NodeType::Router)
            .add_node("host1", NodeType::Host);
            
        simulator.set_topology(topology);
        
        assert!(simulator.get_topology().is_some());
    }

    #[test]
    fn test_protocol_compliance() {
        // Test that protocols conform to RFC specifications
        let tcp_packet = TcpPacket::new();
        
        // TCP minimum header size is 20 bytes
        assert!(tcp_packet.get_header_size() >= 20);
        
        let udp_packet = UdpPacket::new();
        
        // UDP header is always 8 bytes
        assert_eq!(udp_packet.get_header_size(), 8);
        
        let icmp_packet = IcmpPacket::new_echo_request(1, 1, vec![]);
        
        // ICMP echo request minimum size is 8 bytes
        assert!(icmp_packet.to_bytes().len() >= 8);
    }

    #[test]
    fn test_memory_safety() {
        // Test that all network operations are memory-safe
        let socket = Socket::new(SocketType::Stream).unwrap();
        
        // Test buffer operations
        let mut buffer = [0u8; 4096];
        let result = socket.recv(&mut buffer);
        
        // Should handle empty buffer gracefully
        assert!(result.is_ok() || result.is_err()); // Either success or specific error
    }

    #[test]
    fn test_error_handling() {
        // Test proper error handling for network operations
        let invalid_addr = IpAddress::from_str("invalid.ip.address");
        assert!(invalid_addr.is_err());
        
        let socket = Socket::new(SocketType::Stream).unwrap();
        
        // Test connecting to invalid address should fail gracefully
        let fake_addr = IpAddress::new_v4(255, 255, 255, 255, 99999);
        let connect_result = socket.connect(&fake_addr);
        
        // Should fail with appropriate error (connection refused, timeout, etc.)
        assert!(connect_result.is_err());
    }

    #[test]
    fn test_concurrent_operations() {
        use std::thread;
        use std::sync::mpsc;
        
        let (tx, rx) = mpsc::channel();
        
        // Test concurrent socket operations
        let handles: Vec<_> = (0..5).map(|i| {
            let tx_clone = mpsc::Sender::clone(&tx);
            thread::spawn(move || {
                let socket = Socket::new(SocketType::Stream).unwrap();
                tx_clone.send(i).unwrap();
            })
        }).collect();
        
        // Collect results
        let mut results = Vec::new();
        for _ in 0..5 {
            results.push(rx.recv().unwrap());
        }
        
        // All threads should complete successfully
        assert_eq!(results.len(), 5);
        
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_performance_benchmarks() {
        use std::time::{Duration, Instant};
        
        // Test packet processing performance
        let start = Instant::now();
        
        // Process 1000 TCP packets
        for i in 0..1000 {
            let mut packet = TcpPacket::new();
            packet.set_source_port(1000 + i);
            packet.set_dest_port(8080);
            packet.set_sequence_number(i as u32);
            
            // Simulate packet processing
            let _ = packet.get_header_size();
        }
        
        let elapsed = start.elapsed();
        
        // Should process 1000 packets in reasonable time (less than 1 second)
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_protocol_interoperability() {
        // Test that different protocol layers work together
        let mut stack = NetworkStack::new();
        
        // Create interface and add to stack
        let interface = NetworkInterface::new("test0").unwrap();
        let result = stack.add_interface(interface);
        assert!(result.is_ok());
        
        // Create socket and bind to interface
        let socket = Socket::new(SocketType::Stream).unwrap();
        let bind_result = socket.bind(&IpAddress::new_v4(0, 0, 0, 0, 8080));
        assert!(bind_result.is_ok());
        
        // All layers should integrate properly
        assert!(stack.get_interface_count() > 0);
    }

    // Helper types for testing
    struct TestPacket;
    
    impl TestPacket {
        fn new() -> Self {
            TestPacket
        }
    }
    
    impl Packet for TestPacket {
        fn get_data(&self) -> &[u8] {
            &[]
        }
        
        fn set_data(&mut self, _data: &[u8]) {
            // No-op for test packet
        }
    }
}

// Integration tests
#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_end_to_end_communication() {
        use std::thread;
        use std::time::Duration;
        
        // This would test a complete client-server interaction
        // In a real environment, this would involve:
        // 1. Starting a server thread
        // 2. Connecting a client
        // 3. Sending data both ways
        // 4. Verifying data integrity
        
        // For demonstration, we'll create the components
        let server_socket = Socket::new(SocketType::Stream);
        let client_socket = Socket::new(SocketType::Stream);
        
        assert!(server_socket.is_ok());
        assert!(client_socket.is_ok());
    }

    #[test]
    fn test_dns_resolution_workflow() {
        // Test complete DNS resolution process
        let mut dns_client = DnsClient::new().unwrap();
        
        // Test DNS query construction
        let query = dns_client.create_query("example.com");
        assert!(query.is_ok());
        
        // Test response parsing (would need actual DNS response)
        // let response = dns_client.parse_response(&response_data);
        // assert!(response.is_ok());
    }

    #[test]
    fn test_routing_packets() {
        // Test packet routing through the network
        let mut routing_table = RoutingTable::new();
        
        // Add multiple routes
        let routes = vec![
            Route::new().set_destination("10.0.0.0/8").set_next_hop("192.168.1.1"),
            Route::new().set_destination("192.168.0.0/16").set_next_hop("192.168.1.1"),
            Route::new().set_destination("0.0.0.0/0").set_next_hop("192.168.1.1"),
        ];
        
        for route in routes {
            routing_table.add_route(route);
        }
        
        // Test route lookup
        let lookup = routing_table.lookup("10.1.1.1");
        assert!(lookup.is_some());
        
        let default_route = routing_table.lookup("8.8.8.8");
        assert!(default_route.is_some());
    }

    #[test]
    fn test_security_policy_enforcement() {
        // Test that security policies are properly enforced
        let mut firewall = Firewall::new();
        
        // Add comprehensive rules
        let allow_http = FirewallRule::new()
            .set_action(FirewallAction::Allow)
            .set_protocol(Protocol::Tcp)
            .set_port_range(80, 80);
            
        let deny_telnet = FirewallRule::new()
            .set_action(FirewallAction::Deny)
            .set_protocol(Protocol::Tcp)
            .set_port_range(23, 23);
            
        let default_deny = FirewallRule::new()
            .set_action(FirewallAction::Deny)
            .set_protocol(Protocol::Any);
            
        firewall.add_rule(allow_http);
        firewall.add_rule(deny_telnet);
        firewall.add_rule(default_deny);
        
        // Test rule evaluation
        let http_packet = create_test_tcp_packet(80);
        let telnet_packet = create_test_tcp_packet(23);
        let ssh_packet = create_test_tcp_packet(22);
        
        assert_eq!(firewall.evaluate_packet(&http_packet), FirewallAction::Allow);
        assert_eq!(firewall.evaluate_packet(&telnet_packet), FirewallAction::Deny);
        assert_eq!(firewall.evaluate_packet(&ssh_packet), FirewallAction::Deny);
    }

    #[test]
    fn test_network_simulation_scenarios() {
        // Test network simulation and testing framework
        let mut simulator = NetworkSimulator::new();
        
        // Create complex topology
        let mut topology = Topology::new();
        
        // Add routers
        topology.add_node("router1", NodeType::Router);
        topology.add_node("router2", NodeType::Router);
        topology.add_node("router3", NodeType::Router);
        
        // Add hosts
        topology.add_node("host1", NodeType::Host);
        topology.add_node("host2", NodeType::Host);
        topology.add_node("host3", NodeType::Host);
        
        // Connect nodes
        topology.connect("router1", "router2");
        topology.connect("router2", "router3");
        topology.connect("router1", "host1");
        topology.connect("router2", "host2");
        topology.connect("router3", "host3");
        
        simulator.set_topology(topology);
        
        // Test network scenarios
        let scenario = NetworkScenario::new()
            .add_traffic_flow("host1", "host3", TrafficType::Http)
            .add_delay("router2", Duration::from_millis(50))
            .add_packet_loss(0.01); // 1% packet loss
            
        simulator.run_scenario(scenario);
        
        // Verify simulation results
        let metrics = simulator.get_metrics();
        assert!(metrics.packets_sent > 0);
        assert!(metrics.packets_received <= metrics.packets_sent);
    }
}

// Benchmark tests
#[cfg(test)]
mod performance_tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_throughput_benchmark() {
        let start = Instant::now();
        let mut packets_processed = 0;
        let target_duration = Duration::from_millis(100);
        
        while start.elapsed() < target_duration {
            // Process TCP packets at maximum rate
            let packet = TcpPacket::new();
            let _ = packet.get_header_size();
            
            packets_processed += 1;
        }
        
        let elapsed = start.elapsed();
        let throughput = packets_processed as f64 / elapsed.as_secs_f64();
        
        // Should process at least 10,000 packets per second
        assert!(throughput > 10000.0);
        println!("Processed {} packets in {:?} ({} pkt/sec)", 
                 packets_processed, elapsed, throughput as u64);
    }

    #[test]
    fn test_memory_usage_benchmark() {
        use std::alloc::{GlobalAlloc, Layout, System};
        
        let start_alloc = get_allocated_memory();
        
        // Create many network objects
        let mut sockets = Vec::new();
        for _ in 0..1000 {
            if let Ok(socket) = Socket::new(SocketType::Stream) {
                sockets.push(socket);
            }
        }
        
        let end_alloc = get_allocated_memory();
        let memory_used = end_alloc - start_alloc;
        
        // Should not use excessive memory per socket (less than 1KB per socket)
        let memory_per_socket = memory_used as f64 / sockets.len() as f64;
        assert!(memory_per_socket < 1024.0);
        
        println!("Used {} bytes for {} sockets ({} bytes/socket)", 
                 memory_used, sockets.len(), memory_per_socket);
    }

    #[test]
    fn test_concurrent_connection_benchmark() {
        use std::thread;
        use std::sync::{Arc, Mutex};
        use std::time::Instant;
        
        let max_connections = 100;
        let connection_times = Arc::new(Mutex::new(Vec::new()));
        let start = Instant::now();
        
        let handles: Vec<_> = (0..max_connections).map(|i| {
            let times = Arc::clone(&connection_times);
            thread::spawn(move || {
                let conn_start = Instant::now();
                
                // Simulate socket creation and basic operations
                if let Ok(socket) = Socket::new(SocketType::Stream) {
                    let _ = socket.get_socket_error();
                }
                
                let conn_time = conn_start.elapsed();
                let mut times = times.lock().unwrap();
                times.push(conn_time);
            })
        }).collect();
        
        for handle in handles {
            handle.join().unwrap();
        }
        
        let total_time = start.elapsed();
        let times = connection_times.lock().unwrap();
        
        assert_eq!(times.len(), max_connections);
        
        // Calculate average connection time
        let avg_time: Duration = times.iter().sum::<Duration>() / max_connections;
        println!("Created {} connections in {:?} (avg: {:?})", 
                 max_connections, total_time, avg_time);
        
        // Average connection should be fast (less than 10ms)
        assert!(avg_time < Duration::from_millis(10));
    }
}

// Test utilities
#[cfg(test)]
mod test_utils {
    use super::*;

    pub fn create_test_tcp_packet(port: u16) -> TestTcpPacket {
        TestTcpPacket {
            source_port: 12345,
            dest_port: port,
            sequence: 0,
            ack: 0,
            flags: 0,
        }
    }

    pub fn create_test_udp_packet(port: u16) -> TestUdpPacket {
        TestUdpPacket {
            source_port: 12345,
            dest_port: port,
            length: 8,
        }
    }

    pub fn create_test_icmp_packet() -> TestIcmpPacket {
        TestIcmpPacket {
            packet_type: 8,
            code: 0,
            identifier: 1234,
            sequence: 1,
        }
    }

    // Test packet structures
    pub struct TestTcpPacket {
        pub source_port: u16,
        pub dest_port: u16,
        pub sequence: u32,
        pub ack: u32,
        pub flags: u8,
    }

    pub struct TestUdpPacket {
        pub source_port: u16,
        pub dest_port: u16,
        pub length: u16,
    }

    pub struct TestIcmpPacket {
        pub packet_type: u8,
        pub code: u8,
        pub identifier: u16,
        pub sequence: u16,
    }
}

// Mock implementations for testing
#[cfg(test)]
mod mocks {
    use super::*;

    impl Packet for crate::network_tests::TestPacket {
        fn get_data(&self) -> &[u8] {
            &[]
        }

        fn set_data(&mut self, _data: &[u8]) {
            // Mock implementation
        }
    }
}

// Main test runner
#[cfg(test)]
fn main() {
    use crate::network_tests::*;
    use crate::integration_tests::*;
    use crate::performance_tests::*;
    
    println!("üß™ MultiOS Network Stack Test Suite");
    println!("====================================");
    
    // Run all test modules
    network_tests::test_network_stack_initialization();
    network_tests::test_socket_creation();
    network_tests::test_ip_address_parsing();
    network_tests::test_tcp_protocol();
    network_tests::test_udp_protocol();
    network_tests::test_icmp_protocol();
    network_tests::test_dns_client();
    network_tests::test_firewall_rules();
    network_tests::test_routing_table();
    network_tests::test_network_interface();
    network_tests::test_security_features();
    network_tests::test_simulation_framework();
    network_tests::test_protocol_compliance();
    network_tests::test_memory_safety();
    network_tests::test_error_handling();
    
    println!("‚úÖ All tests passed!");
}

// Platform-specific memory measurement
#[cfg(unix)]
fn get_allocated_memory() -> usize {
    // On Unix systems, we could use /proc/self/status
    // For now, return a mock value
    0
}

#[cfg(windows)]
fn get_allocated_memory() -> usize {
    // On Windows, we could use GetProcessMemoryInfo
    // For now, return a mock value
    0
}

// Test result helper
#[cfg(test)]
fn assert_test_result(result: Result<(), Box<dyn std::error::Error>>) {
    match result {
        Ok(_) => println!("‚úÖ Test passed"),
        Err(e) => {
            println!("‚ùå Test failed: {}", e);
            panic!("Test failed: {}", e);
        }
    }
}