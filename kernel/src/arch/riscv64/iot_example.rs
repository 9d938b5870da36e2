//! RISC-V IoT Device Example Application
//! 
//! This example demonstrates the complete RISC-V IoT device support including
//! sensor reading, actuator control, networking, and power management.

use crate::log::{info, warn, error, debug};
use crate::KernelError;
use crate::arch::riscv64::{
    iot::{*, power_management::*, realtime::*, memory::*, networking::*, drivers::*},
    iot_drivers::*,
    iot_bootloader::*,
    iot_networking::*,
};

/// Complete IoT Device Application
pub struct IoTDeviceApplication {
    pub device_id: u32,
    pub config: IoTDeviceConfig,
    pub device_manager: IoTDeviceManager,
    pub networking_stack: IoTNetworkingStack,
    pub power_manager: PowerMode,
    pub is_running: bool,
}

impl IoTDeviceApplication {
    pub fn new(device_id: u32, device_type: IoTDeviceType) -> Result<Self, KernelError> {
        info!("Creating IoT device application for device {:#x}", device_id);
        
        // Create device configuration
        let config = IoTDeviceConfig {
            device_id,
            device_type,
            power_mode: PowerMode::Active,
            realtime_priority: RealtimePriority::Normal,
            memory_limit_kb: 1024,
            max_power_consumption_mw: 500,
        };
        
        // Create device manager
        let mut device_manager = IoTDeviceManager::new();
        
        // Add appropriate devices based on device type
        match device_type {
            IoTDeviceType::Sensor => {
                // Add sensor devices
                let bme280 = BME280Sensor::new(1, 0x76);
                device_manager.add_device(bme280);
                
                let mpu6050 = MPU6050Sensor::new(2, 0x68);
                device_manager.add_device(mpu6050);
            },
            IoTDeviceType::Actuator => {
                // Add actuator devices
                let rgb_led = RGBLEDDriver::new(1, 18, 8);
                device_manager.add_device(rgb_led);
                
                let servo = ServoMotorDriver::new(2, 9);
                device_manager.add_device(servo);
            },
            IoTDeviceType::Gateway => {
                // Add both sensors and actuators plus networking
                let bme280 = BME280Sensor::new(1, 0x76);
                device_manager.add_device(bme280);
                
                let mpu6050 = MPU6050Sensor::new(2, 0x68);
                device_manager.add_device(mpu6050);
                
                let rgb_led = RGBLEDDriver::new(3, 18, 8);
                device_manager.add_device(rgb_led);
            },
            IoTDeviceType::EdgeNode => {
                // Add comprehensive device set
                let bme280 = BME280Sensor::new(1, 0x76);
                device_manager.add_device(bme280);
                
                let mpu6050 = MPU6050Sensor::new(2, 0x68);
                device_manager.add_device(mpu6050);
                
                let rgb_led = RGBLEDDriver::new(3, 18, 8);
                device_manager.add_device(rgb_led);
                
                let servo = ServoMotorDriver::new(4, 9);
                device_manager.add_device(servo);
                
                let wifi = WiFiModuleDriver::new(5, 1);
                device_manager.add_device(wifi);
            },
        }
        
        // Create networking stack
        let mut networking_stack = match device_type {
            IoTDeviceType::Sensor => create_iot_networking_stack("sensor")?,
            IoTDeviceType::Gateway => create_iot_networking_stack("gateway")?,
            IoTDeviceType::EdgeNode => create_iot_networking_stack("edge_node")?,
            IoTDeviceType::Actuator => create_iot_networking_stack("sensor")?,
        };
        
        Ok(Self {
            device_id,
            config,
            device_manager,
            networking_stack,
            power_manager: PowerMode::Active,
            is_running: false,
        })
    }
    
    /// Initialize the IoT device application
    pub fn init(&mut self) -> Result<(), KernelError> {
        info!("Initializing IoT device application...");
        
        // Initialize IoT subsystem
        iot::init_iot_subsystem(&self.config)?;
        
        // Initialize device manager
        self.device_manager.init_all_devices()?;
        
        // Initialize networking
        self.networking_stack.init()?;
        
        // Set up real-time tasks based on device type
        self.setup_realtime_tasks()?;
        
        self.is_running = true;
        
        info!("IoT device application initialized successfully");
        self.print_status();
        
        Ok(())
    }
    
    /// Set up real-time tasks for the device
    fn setup_realtime_tasks(&mut self) -> Result<(), KernelError> {
        info!("Setting up real-time tasks...");
        
        // Define tasks based on device type
        let tasks = match self.config.device_type {
            IoTDeviceType::Sensor => vec![
                RealtimeTask {
                    task_id: 1001,
                    priority: RealtimePriority::Critical,
                    period_ms: 1000, // 1Hz sensor reading
                    deadline_ms: 100,
                    execution_time_ms: 10,
                    handler: || {
                        // Sensor reading task
                        debug!("Executing sensor reading task");
                    },
                },
                RealtimeTask {
                    task_id: 1002,
                    priority: RealtimePriority::High,
                    period_ms: 5000, // 0.2Hz data transmission
                    deadline_ms: 1000,
                    execution_time_ms: 100,
                    handler: || {
                        // Network transmission task
                        debug!("Executing network transmission task");
                    },
                },
            ],
            IoTDeviceType::Gateway => vec![
                RealtimeTask {
                    task_id: 2001,
                    priority: RealtimePriority::Critical,
                    period_ms: 100, // 10Hz data aggregation
                    deadline_ms: 50,
                    execution_time_ms: 5,
                    handler: || {
                        // Data aggregation task
                        debug!("Executing data aggregation task");
                    },
                },
                RealtimeTask {
                    task_id: 2002,
                    priority: RealtimePriority::High,
                    period_ms: 1000, // 1Hz network status check
                    deadline_ms: 200,
                    execution_time_ms: 20,
                    handler: || {
                        // Network maintenance task
                        debug!("Executing network maintenance task");
                    },
                },
            ],
            IoTDeviceType::EdgeNode => vec![
                RealtimeTask {
                    task_id: 3001,
                    priority: RealtimePriority::Critical,
                    period_ms: 10, // 100Hz real-time processing
                    deadline_ms: 5,
                    execution_time_ms: 1,
                    handler: || {
                        // Real-time edge processing
                        debug!("Executing edge processing task");
                    },
                },
                RealtimeTask {
                    task_id: 3002,
                    priority: RealtimePriority::High,
                    period_ms: 1000, // 1Hz data analysis
                    deadline_ms: 500,
                    execution_time_ms: 50,
                    handler: || {
                        // Data analysis task
                        debug!("Executing data analysis task");
                    },
                },
            ],
            IoTDeviceType::Actuator => vec![
                RealtimeTask {
                    task_id: 4001,
                    priority: RealtimePriority::Critical,
                    period_ms: 20, // 50Hz actuator control
                    deadline_ms: 10,
                    execution_time_ms: 2,
                    handler: || {
                        // Actuator control task
                        debug!("Executing actuator control task");
                    },
                },
            ],
        };
        
        // Schedule all tasks
        for task in tasks {
            realtime::schedule_task(task)?;
        }
        
        info!("Real-time tasks scheduled: {}", tasks.len());
        
        Ok(())
    }
    
    /// Main application loop
    pub fn run(&mut self) -> Result<(), KernelError> {
        if !self.is_running {
            return Err(KernelError::NotInitialized);
        }
        
        info!("Starting IoT device main loop...");
        
        // Main application loop
        let mut loop_count = 0;
        
        while self.is_running {
            loop_count = loop_count.wrapping_add(1);
            
            // Execute real-time tasks
            realtime::execute_scheduled_tasks();
            
            // Process device-specific tasks
            match self.config.device_type {
                IoTDeviceType::Sensor => {
                    self.run_sensor_loop()?;
                },
                IoTDeviceType::Actuator => {
                    self.run_actuator_loop()?;
                },
                IoTDeviceType::Gateway => {
                    self.run_gateway_loop()?;
                },
                IoTDeviceType::EdgeNode => {
                    self.run_edge_node_loop()?;
                },
            }
            
            // Update power management
            self.update_power_management();
            
            // Check watchdog
            self.check_watchdog();
            
            // Periodic status output (every 100 iterations)
            if loop_count % 100 == 0 {
                self.print_periodic_status();
            }
            
            // Sleep to save power
            self.sleep_ms(10); // 10ms main loop period
        }
        
        Ok(())
    }
    
    /// Sensor-specific main loop
    fn run_sensor_loop(&mut self) -> Result<(), KernelError> {
        // Read all sensors
        let readings = self.device_manager.read_all_sensors()?;
        
        // Process sensor readings
        for reading in &readings {
            debug!("Sensor {}: {} {} (quality: {}%)", 
                   reading.sensor_type as u8, reading.value, reading.unit, reading.quality);
        }
        
        // Send sensor data over network (every 5 seconds)
        if crate::arch::riscv64::registers::get_time() % 5000000 == 0 {
            self.send_sensor_data(&readings)?;
        }
        
        Ok(())
    }
    
    /// Actuator-specific main loop
    fn run_actuator_loop(&mut self) -> Result<(), KernelError> {
        // Check for network commands
        self.check_for_network_commands()?;
        
        // Update actuator states based on internal logic
        // This would implement the actual control algorithm
        
        Ok(())
    }
    
    /// Gateway-specific main loop
    fn run_gateway_loop(&mut self) -> Result<(), KernelError> {
        // Aggregate data from connected devices
        self.aggregate_sensor_data()?;
        
        // Forward data to cloud/server
        self.forward_data_to_cloud()?;
        
        // Manage network topology
        self.manage_network_topology()?;
        
        Ok(())
    }
    
    /// Edge node-specific main loop
    fn run_edge_node_loop(&mut self) -> Result<(), KernelError> {
        // Read sensors
        let readings = self.device_manager.read_all_sensors()?;
        
        // Perform edge computation
        self.perform_edge_computation(&readings)?;
        
        // Send processed data
        self.send_processed_data()?;
        
        // Run local control algorithms
        self.run_control_algorithms(&readings)?;
        
        Ok(())
    }
    
    /// Send sensor data over network
    fn send_sensor_data(&self, readings: &[SensorReading]) -> Result<(), KernelError> {
        let data = serde_json::to_string(&readings).unwrap_or_default();
        
        // Convert to UDP packet
        let gateway_ip = crate::arch::riscv64::iot_networking::IpAddress::from_str("fd00::1")?;
        self.networking_stack.send_udp(gateway_ip, 8080, data.as_bytes())?;
        
        info!("Sent {} sensor readings to gateway", readings.len());
        
        Ok(())
    }
    
    /// Check for network commands
    fn check_for_network_commands(&self) -> Result<(), KernelError> {
        // This would listen for incoming network commands
        // and execute actuator commands accordingly
        
        Ok(())
    }
    
    /// Aggregate sensor data (gateway function)
    fn aggregate_sensor_data(&self) -> Result<(), KernelError> {
        // Aggregate data from multiple sensor devices
        // This is a placeholder for actual aggregation logic
        
        Ok(())
    }
    
    /// Forward data to cloud/server
    fn forward_data_to_cloud(&self) -> Result<(), KernelError> {
        // Forward aggregated data to cloud server
        // This would establish TCP connection and send data
        
        info!("Forwarding data to cloud server");
        
        Ok(())
    }
    
    /// Manage network topology
    fn manage_network_topology(&self) -> Result<(), KernelError> {
        // Manage mesh network topology, routing tables, etc.
        
        Ok(())
    }
    
    /// Perform edge computation
    fn perform_edge_computation(&self, readings: &[SensorReading]) -> Result<(), KernelError> {
        // Perform local computation on sensor data
        // This could include filtering, anomaly detection, etc.
        
        let computation_result = self.analyze_sensor_data(readings);
        debug!("Edge computation result: {:?}", computation_result);
        
        Ok(())
    }
    
    /// Simple sensor data analysis
    fn analyze_sensor_data(&self, readings: &[SensorReading]) -> String {
        // Simple analysis - detect anomalies
        for reading in readings {
            if reading.quality < 50 {
                return format!("Warning: Low quality reading from sensor {}: {} {} (quality: {}%)",
                             reading.sensor_type as u8, reading.value, reading.unit, reading.quality);
            }
        }
        
        "All sensor readings are normal".to_string()
    }
    
    /// Send processed data
    fn send_processed_data(&self) -> Result<(), KernelError> {
        // Send processed/filtered data
        
        Ok(())
    }
    
    /// Run control algorithms
    fn run_control_algorithms(&self, readings: &[SensorReading]) -> Result<(), KernelError> {
        // Run local control algorithms based on sensor readings
        // This could control local actuators or make decisions
        
        for reading in readings {
            if reading.sensor_type == SensorType::Temperature {
                // Simple temperature-based control
                if reading.value > 30.0 {
                    // Turn on cooling
                    let cooling_command = ActuatorCommand {
                        actuator_type: ActuatorType::Led, // Use LED as indicator
                        value: 0x0000FF, // Blue for cooling
                        duration_ms: 0,
                        priority: RealtimePriority::High,
                    };
                    self.device_manager.control_actuator(3, &cooling_command)?; // LED device
                } else if reading.value < 20.0 {
                    // Turn on heating
                    let heating_command = ActuatorCommand {
                        actuator_type: ActuatorType::Led,
                        value: 0xFF0000, // Red for heating
                        duration_ms: 0,
                        priority: RealtimePriority::High,
                    };
                    self.device_manager.control_actuator(3, &heating_command)?;
                }
            }
        }
        
        Ok(())
    }
    
    /// Update power management
    fn update_power_management(&mut self) {
        // Check if we should change power mode
        // For demo purposes, switch to sleep mode every 60 seconds
        let current_time = crate::arch::riscv64::registers::get_time();
        
        if current_time % 60000000 == 0 && self.power_manager != PowerMode::Sleep {
            info!("Entering power save mode...");
            let _ = enter_low_power_mode(PowerMode::Sleep);
            self.power_manager = PowerMode::Sleep;
        } else if current_time % 60000000 == 30000000 && self.power_manager == PowerMode::Sleep {
            info!("Returning to active mode...");
            let _ = enter_low_power_mode(PowerMode::Active);
            self.power_manager = PowerMode::Active;
        }
    }
    
    /// Check watchdog timer
    fn check_watchdog(&mut self) {
        // Kick watchdog timer to prevent reset
        // This would be implemented with actual hardware
        
        debug!("Watchdog kicked");
    }
    
    /// Sleep for specified milliseconds
    fn sleep_ms(&self, ms: u32) {
        // Use timer interrupt for low-power sleep
        let sleep_cycles = ms * 100000; // Assuming 100MHz clock
        
        // Mock sleep - in real implementation would use WFI instruction
        debug!("Sleeping for {} ms", ms);
    }
    
    /// Print device status
    pub fn print_status(&self) {
        info!("=== IoT Device Status ===");
        info!("Device ID: {:#x}", self.device_id);
        info!("Device Type: {:?}", self.config.device_type);
        info!("Power Mode: {:?}", self.power_manager);
        info!("Active Devices: {}", self.device_manager.devices.len());
        info!("Networking: {}", self.networking_stack.get_interface_status());
        info!("Memory Usage: {:?}", memory::get_memory_stats());
        info!("=======================");
    }
    
    /// Print periodic status
    pub fn print_periodic_status(&self) {
        let power_consumption = get_power_consumption_mw();
        info!("Periodic status - Power: {}mW, Loop count: {}", 
              power_consumption, 
              crate::arch::riscv64::registers::get_cycle());
    }
    
    /// Shutdown the device
    pub fn shutdown(&mut self) -> Result<(), KernelError> {
        info!("Shutting down IoT device...");
        
        self.is_running = false;
        
        // Turn off all actuators
        for device in &self.device_manager.devices {
            if let Ok(command) = device.read() {
                // Skip sensor readings
            }
        }
        
        // Enter hibernate mode
        enter_low_power_mode(PowerMode::Hibernate)?;
        
        info!("IoT device shutdown complete");
        
        Ok(())
    }
}

/// Create IoT device application for specific device types
pub fn create_iot_device(
    device_type: &str,
    device_id: u32,
) -> Result<IoTDeviceApplication, KernelError> {
    let iot_device_type = match device_type {
        "sensor" => IoTDeviceType::Sensor,
        "actuator" => IoTDeviceType::Actuator,
        "gateway" => IoTDeviceType::Gateway,
        "edge_node" => IoTDeviceType::EdgeNode,
        _ => return Err(KernelError::InvalidArgument),
    };
    
    IoTDeviceApplication::new(device_id, iot_device_type)
}

/// Main IoT demonstration function
pub fn run_iot_demonstration() -> Result<(), KernelError> {
    info!("Starting RISC-V IoT Device Demonstration");
    info!("========================================");
    
    // Create different types of IoT devices
    let mut devices = Vec::new();
    
    // Create sensor device
    info!("Creating sensor device...");
    let mut sensor_device = create_iot_device("sensor", 0x1001)?;
    sensor_device.init()?;
    devices.push(sensor_device);
    
    // Create gateway device
    info!("Creating gateway device...");
    let mut gateway_device = create_iot_device("gateway", 0x2001)?;
    gateway_device.init()?;
    devices.push(gateway_device);
    
    // Create edge node device
    info!("Creating edge node device...");
    let mut edge_node_device = create_iot_device("edge_node", 0x3001)?;
    edge_node_device.init()?;
    devices.push(edge_node_device);
    
    // Run all devices (in parallel simulation)
    info!("Running IoT device simulation...");
    
    for (i, device) in devices.iter_mut().enumerate() {
        info!("Starting device {}...", i + 1);
        device.print_status();
        
        // Run device for a limited time
        let run_count = 0;
        while run_count < 10 {
            device.run()?;
            device.sleep_ms(100);
        }
        
        info!("Device {} completed", i + 1);
    }
    
    info!("RISC-V IoT Device Demonstration Complete");
    info!("==========================================");
    
    Ok(())
}