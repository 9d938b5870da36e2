//! Comprehensive IPC System Tests
//! 
//! This module contains comprehensive tests for all IPC mechanisms.

#[cfg(test)]
mod ipc_system_tests {
    use super::*;
    use crate::channels;
    use crate::shared_memory;
    use crate::semaphores;
    use crate::message_queue;
    use crate::pipes;
    use crate::signals;
    use crate::events;

    #[test]
    fn test_comprehensive_ipc_initialization() {
        // Test overall IPC system initialization
        assert!(init().is_ok());
        
        // Test basic resource creation
        let channel = create_channel(1024);
        assert!(channel.is_ok());
        
        let shm = create_shared_memory(2048);
        assert!(shm.is_ok());
        
        let semaphore = create_semaphore(1);
        assert!(semaphore.is_ok());
    }

    #[test]
    fn test_channel_communication() {
        init().unwrap();
        
        let channel_id = create_channel(1024).unwrap();
        
        // Test message passing
        let data = b"Hello, Channel!";
        let send_result = channels::ChannelHandle::new(channel_id)
            .send(data, 100);
        
        assert!(send_result.is_ok());
        
        // Test receiving would require access to the actual channel
        // This is a simplified test
    }

    #[test]
    fn test_shared_memory_access() {
        init().unwrap();
        
        let shm_id = create_shared_memory(4096).unwrap();
        
        // Test shared memory operations
        // In real implementation, would map to process and test read/write
        assert!(shm_id.id > 0);
    }

    #[test]
    fn test_semaphore_synchronization() {
        init().unwrap();
        
        let sem_id = create_semaphore(1).unwrap();
        
        // Test semaphore operations
        let semaphore = semaphores::Semaphore::new(sem_id.id, 1).unwrap();
        
        // Test wait operation
        assert!(semaphore.try_wait(100).is_ok());
        assert_eq!(semaphore.get_value(), 0);
        
        // Test post operation
        assert!(semaphore.post(100).is_ok());
        assert_eq!(semaphore.get_value(), 1);
    }

    #[test]
    fn test_message_queue_operations() {
        init().unwrap();
        
        let mq_id = create_message_queue(
            b"test_queue", 
            1024, 
            10, 
            message_queue::MessageQueueFlags::PRIORITY_ORDER
        );
        assert!(mq_id.is_ok());
        
        // Test queue operations would require accessing the actual queue
        // This is a simplified test
    }

    #[test]
    fn test_pipe_communication() {
        init().unwrap();
        
        let pipe = create_pipe(1024, pipes::PipeFlags::empty());
        assert!(pipe.is_ok());
        
        // Test pipe operations
        let pipe = pipe.unwrap();
        let data = b"Hello, Pipe!";
        
        // In real implementation, would test actual write/read operations
        assert!(pipe.id > 0);
    }

    #[test]
    fn test_event_synchronization() {
        init().unwrap();
        
        let event_handle = create_event(
            events::EventType::ManualReset, 
            events::EventFlags::empty()
        );
        assert!(event_handle.is_ok());
        
        // Test event operations
        let event_handle = event_handle.unwrap();
        assert!(event_handle.id > 0);
    }

    #[test]
    fn test_ipc_error_handling() {
        init().unwrap();
        
        // Test invalid handle errors
        assert_eq!(open_channel(9999), Err(IpcError::InvalidHandle));
        
        // Test buffer too small error
        let channel_id = create_channel(4).unwrap();
        // Would test with data larger than buffer in real implementation
        
        // Test permission denied errors
        // Would test with processes that don't have access
    }

    #[test]
    fn test_ipc_statistics() {
        init().unwrap();
        
        // Create some resources
        let _channel = create_channel(1024).unwrap();
        let _semaphore = create_semaphore(1).unwrap();
        let _pipe = create_pipe(1024, pipes::PipeFlags::empty()).unwrap();
        
        // Test statistics
        let connection_count = get_connection_count();
        assert!(connection_count >= 3); // Should have at least the created resources
    }

    #[test]
    fn test_signal_handling() {
        let manager = signals::SignalManager::new();
        
        // Register process
        manager.register_process(100);
        
        // Test signal operations
        assert!(manager.send_signal(signal::SIGTERM, 100, 200, Vec::new()).is_ok());
        
        // Process signals
        let delivered = manager.process_signals(100);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].signal, signal::SIGTERM);
    }

    #[test]
    fn test_network_ipc() {
        let manager = network::NetworkManager::new();
        
        // Test server creation
        let server_endpoint = network::NetworkEndpoint {
            address_type: network::AddressType::IPv4,
            address: vec![127, 0, 0, 1],
            port: 8080,
            protocol: network::NetworkProtocol::TCP,
        };
        
        let server_id = manager.create_server(server_endpoint, network::NetworkProtocol::TCP, 100);
        assert!(server_id.is_ok());
        
        // Test client creation
        let client_id = manager.create_client(server_endpoint);
        assert!(client_id.is_ok());
    }

    #[test]
    fn test_ipc_type_enum() {
        assert_eq!(IpcType::Channel as u8, 0);
        assert_eq!(IpcType::SharedMemory as u8, 1);
        assert_eq!(IpcType::Semaphore as u8, 2);
        assert_eq!(IpcType::MessageQueue as u8, 3);
        assert_eq!(IpcType::Signal as u8, 4);
        assert_eq!(IpcType::Pipe as u8, 5);
        assert_eq!(IpcType::Socket as u8, 6);
    }

    #[test]
    fn test_ipc_error_enum() {
        let errors = [
            IpcError::InvalidHandle,
            IpcError::PermissionDenied,
            IpcError::ResourceExhausted,
            IpcError::Timeout,
            IpcError::NoSuchProcess,
            IpcError::BufferTooSmall,
            IpcError::WouldBlock,
            IpcError::Interrupted,
            IpcError::NotConnected,
        ];
        
        // Verify all error variants exist and have unique values
        for (i, &error) in errors.iter().enumerate() {
            assert_eq!(error as usize, i);
        }
    }

    #[test]
    fn test_concurrent_ipc_operations() {
        init().unwrap();
        
        // Create shared resources
        let channel_id = create_channel(2048).unwrap();
        let semaphore_id = create_semaphore(1).unwrap();
        
        // Simulate concurrent access patterns
        // In real implementation, would use threads to test concurrent access
        
        // Test channel operations
        let data = b"Concurrent test data";
        let _ = channels::ChannelHandle::new(channel_id)
            .send(data, 100);
        
        // Test semaphore operations
        let semaphore = semaphores::Semaphore::new(semaphore_id.id, 1).unwrap();
        assert!(semaphore.try_wait(100).is_ok());
        assert!(semaphore.post(100).is_ok());
    }

    #[test]
    fn test_ipc_resource_cleanup() {
        init().unwrap();
        
        let initial_count = get_connection_count();
        
        // Create resources
        let _channel = create_channel(1024).unwrap();
        let _shm = create_shared_memory(2048).unwrap();
        let _sem = create_semaphore(1).unwrap();
        
        let after_create = get_connection_count();
        assert_eq!(after_create, initial_count + 3);
        
        // Resources would be cleaned up when they go out of scope
        // In real implementation, would explicitly close/destroy resources
    }

    #[test]
    fn test_ipc_performance_characteristics() {
        init().unwrap();
        
        // Test basic operation latency
        let start_time = core::time::Instant::now();
        
        // Perform IPC operations
        for i in 0..1000 {
            let _channel = create_channel(512);
            let _semaphore = create_semaphore(1);
        }
        
        let end_time = core::time::Instant::now();
        let duration = end_time.duration_since(start_time);
        
        // Basic performance test - operations should complete in reasonable time
        assert!(duration.as_millis() < 1000); // Should complete within 1 second
        
        log::info!("IPC performance test: 1000 operations in {:?}ms", duration.as_millis());
    }

    #[test]
    fn test_ipc_memory_usage() {
        init().unwrap();
        
        let initial_resources = get_connection_count();
        
        // Create multiple resources to test memory usage
        let mut handles = Vec::new();
        
        for i in 0..100 {
            let channel = create_channel(1024);
            if let Ok(handle) = channel {
                handles.push(handle);
            }
        }
        
        let final_resources = get_connection_count();
        assert_eq!(final_resources, initial_resources + handles.len());
        
        // In real implementation, would measure actual memory usage
    }
}

// Integration tests for complete IPC workflows
#[cfg(test)]
mod ipc_integration_tests {
    use super::*;
    use crate::channels;
    use crate::semaphores;
    use crate::events;

    #[test]
    fn test_producer_consumer_workflow() {
        init().unwrap();
        
        // Create synchronization primitives
        let data_ready_event = create_event(
            events::EventType::AutoReset, 
            events::EventFlags::empty()
        ).unwrap();
        
        let empty_semaphore = create_semaphore(10).unwrap(); // 10 buffer slots
        let full_semaphore = create_semaphore(0).unwrap();   // 0 full slots initially
        
        // Simulate producer-consumer workflow
        // In real implementation, would have actual producer/consumer threads
        
        // Producer signals data is ready
        assert!(data_ready_event.id > 0);
    }

    #[test]
    fn test_server_client_ipc_pattern() {
        init().unwrap();
        
        // Create server resources
        let server_channel = create_channel(4096).unwrap();
        
        // Create client resources  
        let client_channel = create_channel(4096).unwrap();
        
        // Test request-response pattern
        // In real implementation, would test actual message exchange
        assert!(server_channel.id != client_channel.id);
    }

    #[test]
    fn test_multithreaded_ipc_coordination() {
        init().unwrap();
        
        // Create coordination primitives
        let barrier_event = create_named_event(
            b"barrier", 
            events::EventType::ManualReset, 
            events::EventFlags::empty()
        ).unwrap();
        
        let mutex = create_semaphore(1).unwrap(); // Use semaphore as mutex
        
        // Test coordination between multiple threads
        // In real implementation, would use actual threads
        assert!(barrier_event.id > 0);
        assert!(mutex.id > 0);
    }
}

// Performance and stress tests
#[cfg(test)]
mod ipc_stress_tests {
    use super::*;
    use crate::pipes;
    use crate::message_queue;

    #[test]
    fn test_high_frequency_ipc() {
        init().unwrap();
        
        let pipe = create_pipe(64, pipes::PipeFlags::NON_BLOCKING).unwrap();
        
        // Test high-frequency small messages
        let small_data = b"X";
        let mut total_sent = 0;
        let mut total_received = 0;
        
        for _ in 0..1000 {
            // Try to send small messages rapidly
            if pipe.write(small_data, 100).is_ok() {
                total_sent += 1;
            }
            
            // Try to receive
            let mut buffer = [0u8; 1];
            if pipe.read(&mut buffer, 101).is_ok() {
                total_received += 1;
            }
        }
        
        // Should be able to send/receive some messages even with non-blocking I/O
        assert!(total_sent > 0);
        assert!(total_received > 0);
    }

    #[test]
    fn test_large_message_handling() {
        init().unwrap();
        
        let mq_id = create_message_queue(
            b"large_queue", 
            8192,  // Large message size
            10,    // Max messages
            message_queue::MessageQueueFlags::empty()
        ).unwrap();
        
        // Test with large messages
        let large_data = vec![42u8; 4096]; // 4KB message
        
        // In real implementation, would test actual send/receive of large messages
        assert!(mq_id > 0);
    }

    #[test]
    fn test_concurrent_resource_creation() {
        init().unwrap();
        
        let start_count = get_connection_count();
        
        // Create resources concurrently (simulated)
        let mut resource_ids = Vec::new();
        
        for i in 0..50 {
            match i % 3 {
                0 => {
                    if let Ok(id) = create_channel(1024) {
                        resource_ids.push(("channel", id.id));
                    }
                }
                1 => {
                    if let Ok(id) = create_semaphore(1) {
                        resource_ids.push(("semaphore", id.id));
                    }
                }
                2 => {
                    if let Ok(event) = create_event(
                        events::EventType::AutoReset, 
                        events::EventFlags::empty()
                    ) {
                        resource_ids.push(("event", event.id));
                    }
                }
                _ => {}
            }
        }
        
        let end_count = get_connection_count();
        assert_eq!(end_count - start_count, resource_ids.len());
        
        log::info!("Created {} resources concurrently", resource_ids.len());
    }
}
