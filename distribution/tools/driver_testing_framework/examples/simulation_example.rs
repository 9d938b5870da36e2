//! Hardware Simulation Example
//!
//! This example demonstrates how to use the hardware simulation capabilities
//! of the driver testing framework to test drivers without physical hardware.

use driver_testing_framework::{
    SimulationEnvironment, HardwareSimulator, SimulatedDevice, DeviceInteraction,
    DriverTestError, TestResult, TestStatus, TestCategory
};
use std::time::Duration;

/// Example of testing serial driver with simulated UART hardware
pub struct SimulatedSerialDriverTest {
    /// Test name
    name: String,
    /// Test configuration
    category: TestCategory,
}

impl SimulatedSerialDriverTest {
    pub fn new() -> Self {
        Self {
            name: "simulated_serial_driver_test".to_string(),
            category: TestCategory::Integration,
        }
    }
    
    /// Run the simulated serial driver test
    pub async fn run_test(&mut self, simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        log::info!("Starting simulated serial driver test");
        
        // Test 1: Device detection and initialization
        log::info!("Test 1: Device detection and initialization");
        let device_detection_result = self.test_device_detection(simulator).await?;
        if !device_detection_result.is_success() {
            return Ok(device_detection_result);
        }
        
        // Test 2: Serial communication
        log::info!("Test 2: Serial communication");
        let serial_comm_result = self.test_serial_communication(simulator).await?;
        if !serial_comm_result.is_success() {
            return Ok(serial_comm_result);
        }
        
        // Test 3: Interrupt handling
        log::info!("Test 3: Interrupt handling");
        let interrupt_result = self.test_interrupt_handling(simulator).await?;
        if !interrupt_result.is_success() {
            return Ok(interrupt_result);
        }
        
        // Test 4: Buffer operations
        log::info!("Test 4: Buffer operations");
        let buffer_result = self.test_buffer_operations(simulator).await?;
        if !buffer_result.is_success() {
            return Ok(buffer_result);
        }
        
        // Test 5: Error handling
        log::info!("Test 5: Error handling");
        let error_result = self.test_error_handling(simulator).await?;
        if !error_result.is_success() {
            return Ok(error_result);
        }
        
        Ok(TestResult {
            name: self.name.clone(),
            status: TestStatus::Passed,
            duration: start_time.elapsed(),
            message: "All simulated serial driver tests passed".to_string(),
            category: self.category,
            metadata: None,
            metrics: None,
        })
    }
    
    /// Test device detection and initialization
    async fn test_device_detection(&mut self, simulator: &HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Check if UART device exists in simulation
        if let Some(device) = simulator.get_device("uart0") {
            log::info!("UART device detected in simulation: {:?}", device);
            Ok(TestResult {
                name: format!("{}_device_detection", self.name),
                status: TestStatus::Passed,
                duration: start_time.elapsed(),
                message: "UART device detected successfully".to_string(),
                category: self.category,
                metadata: None,
                metrics: None,
            })
        } else {
            Ok(TestResult {
                name: format!("{}_device_detection", self.name),
                status: TestStatus::Failed,
                duration: start_time.elapsed(),
                message: "UART device not found in simulation".to_string(),
                category: self.category,
                metadata: None,
                metrics: None,
            })
        }
    }
    
    /// Test serial communication with simulated UART
    async fn test_serial_communication(&mut self, simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Test data to send
        let test_data = vec![0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x0A]; // "Hello\n"
        
        // Write data to simulated UART
        let write_interaction = DeviceInteraction::Write {
            address: 0x3F8, // Standard UART base address
            data: test_data.clone(),
        };
        
        simulator.simulate_device_interaction("uart0", write_interaction)?;
        log::info!("Wrote test data to simulated UART");
        
        // Simulate some time for data processing
        tokio::time::sleep(Duration::from_millis(10)).await;
        
        // Read data back (simulate receiving response)
        let read_interaction = DeviceInteraction::Read {
            address: 0x3F8,
            size: test_data.len() as u32,
        };
        
        // In a real scenario, this would return the received data
        // For simulation, we just verify the read operation works
        match simulator.simulate_device_interaction("uart0", read_interaction) {
            Ok(_) => {
                Ok(TestResult {
                    name: format!("{}_serial_communication", self.name),
                    status: TestStatus::Passed,
                    duration: start_time.elapsed(),
                    message: format!("Serial communication test passed: {} bytes processed", test_data.len()),
                    category: self.category,
                    metadata: None,
                    metrics: None,
                })
            },
            Err(e) => {
                Ok(TestResult {
                    name: format!("{}_serial_communication", self.name),
                    status: TestStatus::Failed,
                    duration: start_time.elapsed(),
                    message: format!("Serial communication test failed: {}", e),
                    category: self.category,
                    metadata: None,
                    metrics: None,
                })
            }
        }
    }
    
    /// Test interrupt handling with simulated interrupts
    async fn test_interrupt_handling(&mut self, simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Generate UART interrupt (IRQ 4 typically)
        log::info!("Generating UART interrupt (IRQ 4)");
        simulator.simulate_interrupt(4)?;
        
        // Let the system process the interrupt
        tokio::time::sleep(Duration::from_millis(5)).await;
        
        // Simulate interrupt handling
        let interrupt_interaction = DeviceInteraction::Interrupt { irq: 4 };
        match simulator.simulate_device_interaction("uart0", interrupt_interaction) {
            Ok(_) => {
                Ok(TestResult {
                    name: format!("{}_interrupt_handling", self.name),
                    status: TestStatus::Passed,
                    duration: start_time.elapsed(),
                    message: "Interrupt handling test passed".to_string(),
                    category: self.category,
                    metadata: None,
                    metrics: None,
                })
            },
            Err(e) => {
                Ok(TestResult {
                    name: format!("{}_interrupt_handling", self.name),
                    status: TestStatus::Failed,
                    duration: start_time.elapsed(),
                    message: format!("Interrupt handling test failed: {}", e),
                    category: self.category,
                    metadata: None,
                    metrics: None,
                })
            }
        }
    }
    
    /// Test buffer operations
    async fn test_buffer_operations(&mut self, simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Test multiple buffer operations
        let buffer_sizes = vec![16, 64, 256, 1024];
        let mut total_bytes_processed = 0;
        
        for &buffer_size in &buffer_sizes {
            let test_buffer = vec![0xAA; buffer_size];
            
            // Write buffer to UART
            let write_interaction = DeviceInteraction::Write {
                address: 0x3F8,
                data: test_buffer,
            };
            
            simulator.simulate_device_interaction("uart0", write_interaction)?;
            total_bytes_processed += buffer_size;
            
            log::info!("Processed {} byte buffer", buffer_size);
        }
        
        Ok(TestResult {
            name: format!("{}_buffer_operations", self.name),
            status: TestStatus::Passed,
            duration: start_time.elapsed(),
            message: format!("Buffer operations test passed: {} bytes total", total_bytes_processed),
            category: self.category,
            metadata: None,
            metrics: None,
        })
    }
    
    /// Test error handling scenarios
    async fn test_error_handling(&mut self, simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Test reset operation
        log::info!("Testing device reset");
        let reset_interaction = DeviceInteraction::Reset;
        simulator.simulate_device_interaction("uart0", reset_interaction)?;
        
        // Test invalid command handling
        log::info!("Testing invalid command handling");
        let invalid_command = DeviceInteraction::Command {
            command: "invalid_command".to_string(),
            parameters: vec![0x01, 0x02, 0x03],
        };
        
        // This should either succeed (if the simulator handles it gracefully) or fail gracefully
        let command_result = simulator.simulate_device_interaction("uart0", invalid_command);
        
        match command_result {
            Ok(_) => {
                Ok(TestResult {
                    name: format!("{}_error_handling", self.name),
                    status: TestStatus::Passed,
                    duration: start_time.elapsed(),
                    message: "Error handling test passed".to_string(),
                    category: self.category,
                    metadata: None,
                    metrics: None,
                })
            },
            Err(_) => {
                // Expected to fail for invalid command, but test still passes
                Ok(TestResult {
                    name: format!("{}_error_handling", self.name),
                    status: TestStatus::Passed,
                    duration: start_time.elapsed(),
                    message: "Error handling test passed (invalid command rejected)".to_string(),
                    category: self.category,
                    metadata: None,
                    metrics: None,
                })
            }
        }
    }
}

/// Example of testing keyboard driver with simulated PS/2 keyboard
pub struct SimulatedKeyboardDriverTest {
    name: String,
    category: TestCategory,
}

impl SimulatedKeyboardDriverTest {
    pub fn new() -> Self {
        Self {
            name: "simulated_keyboard_driver_test".to_string(),
            category: TestCategory::Integration,
        }
    }
    
    pub async fn run_test(&mut self, simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        log::info!("Starting simulated keyboard driver test");
        
        // Test keyboard interrupt generation
        log::info!("Testing keyboard interrupt generation");
        simulator.simulate_interrupt(1)?; // PS/2 keyboard typically uses IRQ 1
        
        // Simulate keyboard data
        let keyboard_data = DeviceInteraction::Command {
            command: "send_key".to_string(),
            parameters: vec![0x1C], // Enter key scan code
        };
        
        simulator.simulate_device_interaction("keyboard0", keyboard_data)?;
        
        // Test keyboard interrupt handling
        let interrupt_interaction = DeviceInteraction::Interrupt { irq: 1 };
        simulator.simulate_device_interaction("keyboard0", interrupt_interaction)?;
        
        Ok(TestResult {
            name: self.name.clone(),
            status: TestStatus::Passed,
            duration: start_time.elapsed(),
            message: "Simulated keyboard driver test passed".to_string(),
            category: self.category,
            metadata: None,
            metrics: None,
        })
    }
}

/// Example of testing timer driver with simulated PIT
pub struct SimulatedTimerDriverTest {
    name: String,
    category: TestCategory,
}

impl SimulatedTimerDriverTest {
    pub fn new() -> Self {
        Self {
            name: "simulated_timer_driver_test".to_string(),
            category: TestCategory::Integration,
        }
    }
    
    pub async fn run_test(&mut self, simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        log::info!("Starting simulated timer driver test");
        
        // Test PIT timer interrupt
        log::info!("Testing PIT timer interrupt");
        simulator.simulate_interrupt(0)?; // PIT timer typically uses IRQ 0
        
        // Simulate timer configuration
        let timer_config = DeviceInteraction::Write {
            address: 0x40, // PIT channel 0
            data: vec![0x00, 0xFF], // Low and high byte for timer value
        };
        
        simulator.simulate_device_interaction("pit", timer_config)?;
        
        // Run simulation step to advance time
        simulator.step()?;
        
        // Test timer interrupt handling
        let interrupt_interaction = DeviceInteraction::Interrupt { irq: 0 };
        simulator.simulate_device_interaction("pit", interrupt_interaction)?;
        
        Ok(TestResult {
            name: self.name.clone(),
            status: TestStatus::Passed,
            duration: start_time.elapsed(),
            message: "Simulated timer driver test passed".to_string(),
            category: self.category,
            metadata: None,
            metrics: None,
        })
    }
}

/// Example of testing multiple devices concurrently
pub struct ConcurrentDeviceTest {
    name: String,
    category: TestCategory,
}

impl ConcurrentDeviceTest {
    pub fn new() -> Self {
        Self {
            name: "concurrent_device_test".to_string(),
            category: TestCategory::Stress,
        }
    }
    
    pub async fn run_test(&mut self, simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        log::info!("Starting concurrent device test");
        
        // Spawn tasks for different devices
        let mut handles = Vec::new();
        
        // UART task
        let uart_handle = tokio::spawn(async {
            let uart_test = SimulatedSerialDriverTest::new();
            uart_test.run_test(simulator).await
        });
        handles.push(("uart".to_string(), uart_handle));
        
        // Keyboard task
        let keyboard_handle = tokio::spawn(async {
            let keyboard_test = SimulatedKeyboardDriverTest::new();
            keyboard_test.run_test(simulator).await
        });
        handles.push(("keyboard".to_string(), keyboard_handle));
        
        // Timer task
        let timer_handle = tokio::spawn(async {
            let timer_test = SimulatedTimerDriverTest::new();
            timer_test.run_test(simulator).await
        });
        handles.push(("timer".to_string(), timer_handle));
        
        // Wait for all tasks to complete
        let mut results = Vec::new();
        for (device_name, handle) in handles {
            match handle.await {
                Ok(result) => {
                    log::info!("Device {} test completed: {}", device_name, result.status);
                    results.push(result);
                },
                Err(e) => {
                    log::error!("Device {} test failed: {}", device_name, e);
                    results.push(TestResult {
                        name: format!("{}_concurrent_{}", self.name, device_name),
                        status: TestStatus::Failed,
                        duration: Duration::from_secs(0),
                        message: format!("Concurrent test failed for device {}: {}", device_name, e),
                        category: self.category,
                        metadata: None,
                        metrics: None,
                    });
                }
            }
        }
        
        // Check if all tests passed
        let all_passed = results.iter().all(|r| r.is_success());
        let failed_count = results.iter().filter(|r| r.is_failure()).count();
        
        Ok(TestResult {
            name: self.name.clone(),
            status: if all_passed { TestStatus::Passed } else { TestStatus::Failed },
            duration: start_time.elapsed(),
            message: format!("Concurrent device test: {} passed, {} failed", results.len() - failed_count, failed_count),
            category: self.category,
            metadata: None,
            metrics: None,
        })
    }
}

/// Main example demonstrating hardware simulation
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();
    
    log::info!("Starting hardware simulation example");
    
    // Create simulation environment
    let sim_env = SimulationEnvironment {
        virtual_hardware: true,
        network_simulation: true,
        storage_simulation: true,
        interrupt_simulation: true,
        timing_multiplier: 1.0,
    };
    
    // Initialize hardware simulator
    let mut simulator = HardwareSimulator::new(sim_env);
    simulator.initialize()?;
    
    log::info!("Hardware simulator initialized with {} devices", 
              simulator.get_statistics().device_count);
    
    // Test 1: Individual device tests
    log::info!("\n=== Test 1: Individual Device Tests ===");
    
    let mut serial_test = SimulatedSerialDriverTest::new();
    let serial_result = serial_test.run_test(&mut simulator).await?;
    log::info!("Serial test result: {}", serial_result.status);
    
    let mut keyboard_test = SimulatedKeyboardDriverTest::new();
    let keyboard_result = keyboard_test.run_test(&mut simulator).await?;
    log::info!("Keyboard test result: {}", keyboard_result.status);
    
    let mut timer_test = SimulatedTimerDriverTest::new();
    let timer_result = timer_test.run_test(&mut simulator).await?;
    log::info!("Timer test result: {}", timer_result.status);
    
    // Test 2: Concurrent device test
    log::info!("\n=== Test 2: Concurrent Device Test ===");
    
    let mut concurrent_test = ConcurrentDeviceTest::new();
    let concurrent_result = concurrent_test.run_test(&mut simulator).await?;
    log::info!("Concurrent test result: {}", concurrent_result.status);
    
    // Test 3: Stress test with rapid operations
    log::info!("\n=== Test 3: Stress Test ===");
    
    let stress_result = run_stress_test(&mut simulator).await?;
    log::info!("Stress test result: {}", stress_result.status);
    
    // Display simulation statistics
    let stats = simulator.get_statistics();
    log::info!("\n=== Simulation Statistics ===");
    log::info!("Devices: {}", stats.device_count);
    log::info!("Buses: {}", stats.bus_count);
    log::info!("Interrupts generated: {}", stats.interrupt_count);
    log::info!("Memory accesses: {}", stats.memory_access_count);
    log::info!("Simulation time: {:?}", stats.time_elapsed);
    
    // Shutdown simulator
    simulator.shutdown()?;
    
    log::info!("Hardware simulation example completed successfully");
    
    Ok(())
}

/// Run stress test with rapid operations
async fn run_stress_test(simulator: &mut HardwareSimulator) -> Result<TestResult, DriverTestError> {
    let start_time = std::time::Instant::now();
    let mut operations_count = 0;
    let target_operations = 1000;
    
    log::info!("Running stress test with {} operations", target_operations);
    
    for i in 0..target_operations {
        // Rapid device operations
        let device_name = match i % 4 {
            0 => "uart0",
            1 => "keyboard0",
            2 => "pit",
            3 => "pci_device",
            _ => "uart0",
        };
        
        // Generate random data for operation
        let test_data = vec![(i % 256) as u8; 8];
        
        // Write operation
        let write_interaction = DeviceInteraction::Write {
            address: 0x1000 + i as u64,
            data: test_data.clone(),
        };
        
        if let Err(e) = simulator.simulate_device_interaction(device_name, write_interaction) {
            log::warn!("Operation {} failed on device {}: {}", i, device_name, e);
        } else {
            operations_count += 1;
        }
        
        // Generate interrupt occasionally
        if i % 100 == 0 {
            let irq = (i % 8) as u8;
            if let Err(e) = simulator.simulate_interrupt(irq) {
                log::warn!("Interrupt {} failed: {}", irq, e);
            }
        }
        
        // Advance simulation time
        simulator.step()?;
        
        // Small delay to simulate realistic timing
        if i % 100 == 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
    
    let duration = start_time.elapsed();
    let success_rate = (operations_count as f32 / target_operations as f32) * 100.0;
    
    Ok(TestResult {
        name: "stress_test_rapid_operations".to_string(),
        status: if operations_count > target_operations / 2 { TestStatus::Passed } else { TestStatus::Warning },
        duration,
        message: format!("Stress test completed: {}/{} operations successful ({:.1}%)", 
                        operations_count, target_operations, success_rate),
        category: TestCategory::Stress,
        metadata: None,
        metrics: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[tokio::test]
    async fn test_hardware_simulator_initialization() {
        let sim_env = SimulationEnvironment::default();
        let mut simulator = HardwareSimulator::new(sim_env);
        
        assert!(simulator.initialize().is_ok());
        assert!(simulator.get_statistics().device_count > 0);
        
        let _ = simulator.shutdown();
    }
    
    #[tokio::test]
    async fn test_device_interaction() {
        let sim_env = SimulationEnvironment::default();
        let mut simulator = HardwareSimulator::new(sim_env);
        
        simulator.initialize().unwrap();
        
        // Test write interaction
        let interaction = DeviceInteraction::Write {
            address: 0x3F8,
            data: vec![0x48, 0x65, 0x6C, 0x6C, 0x6F],
        };
        
        assert!(simulator.simulate_device_interaction("uart0", interaction).is_ok());
        
        let _ = simulator.shutdown();
    }
    
    #[tokio::test]
    async fn test_interrupt_simulation() {
        let sim_env = SimulationEnvironment::default();
        let mut simulator = HardwareSimulator::new(sim_env);
        
        simulator.initialize().unwrap();
        
        // Test interrupt generation
        assert!(simulator.simulate_interrupt(1).is_ok());
        
        let _ = simulator.shutdown();
    }
}
