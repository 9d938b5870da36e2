//! Industrial IoT Monitoring with Predictive Maintenance
//! 
//! This application demonstrates advanced industrial IoT monitoring using RISC-V
//! architecture. It includes vibration analysis, temperature monitoring,
//! predictive maintenance algorithms, and real-time data processing for
//! manufacturing and industrial automation.
//!
//! Hardware Requirements:
//! - RISC-V development board (SiFive HiFive, Kendryte K210)
//! - Vibration sensor (accelerometer + gyroscope)
//! - Temperature sensors (multiple points)
//! - Current sensor for motor monitoring
//! - Pressure sensor for pneumatic systems
//! - Ethernet or WiFi connectivity
//! - Industrial-grade enclosure

#![no_std]
#![no_main]

use core::fmt::Write;
use heapless::{String, Vec, FnvIndexMap};
use core::sync::atomic::{AtomicU32, Ordering};

use riscv_hal::*;
use iot_communication::*;

// Vibration data structure
#[derive(Clone, Copy, Debug)]
struct VibrationData {
    x_axis: i16,      // X-axis acceleration (mG)
    y_axis: i16,      // Y-axis acceleration (mG)
    z_axis: i16,      // Z-axis acceleration (mG)
    gyro_x: i16,      // X-axis rotation (degrees/sec)
    gyro_y: i16,      // Y-axis rotation (degrees/sec)
    gyro_z: i16,      // Z-axis rotation (degrees/sec)
    rms_vibration: u16, // RMS value
    frequency_peak: u16, // Dominant frequency
    timestamp: u32,
}

// Temperature monitoring data
#[derive(Clone, Copy, Debug)]
struct TemperatureData {
    bearing_temp: i16,     // Main bearing temperature (deci-celsius)
    motor_temp: i16,       // Motor winding temperature (deci-celsius)
    ambient_temp: i16,     // Ambient temperature (deci-celsius)
    panel_temp: i16,       // Control panel temperature (deci-celsius)
    timestamp: u32,
}

// Electrical monitoring data
#[derive(Clone, Copy, Debug)]
struct ElectricalData {
    current_rms: u16,      // RMS current (deci-amps)
    voltage_rms: u16,      // RMS voltage (deci-volts)
    power_factor: u16,     // Power factor (deci-units)
    harmonic_distortion: u16, // THD (deci-percent)
    frequency: u16,        // Supply frequency (deci-hertz)
    timestamp: u32,
}

// Predictive maintenance metrics
#[derive(Clone, Copy, Debug)]
struct MaintenancePrediction {
    bearing_health: u8,    // 0-100% (100 = perfect)
    motor_health: u8,      // 0-100%
    vibration_trend: i8,   // -10 to +10 (negative = degrading)
    temperature_trend: i8, // -10 to +10
    predicted_failure_days: u16, // Days until predicted failure
    recommended_action: String<64>,
    confidence_level: u8,  // 0-100%
    timestamp: u32,
}

// Alert system
#[derive(Clone, Copy, Debug)]
struct Alert {
    alert_id: u32,
    severity: AlertSeverity,
    category: AlertCategory,
    message: String<128>,
    timestamp: u32,
    acknowledged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum AlertSeverity {
    Info = 1,
    Warning = 2,
    Critical = 3,
    Emergency = 4,
}

#[derive(Clone, Copy, Debug)]
enum AlertCategory {
    Vibration,
    Temperature,
    Electrical,
    Maintenance,
    Communication,
    System,
}

// Machine configuration
#[derive(Clone, Copy)]
struct MachineConfig {
    machine_id: String<32>,
    machine_type: String<24>,
    operating_hours: u32,
    maintenance_schedule: u32, // days between maintenance
    vibration_threshold: u16,
    temperature_warning: i16,
    temperature_critical: i16,
    current_threshold: u16,
    sampling_rate_hz: u32,
    transmission_interval: u32,
}

// Main application state
struct IndustrialIoTApp {
    machine_info: MachineConfig,
    vibration_buffer: Vec<VibrationData, 1024>,
    temperature_buffer: Vec<TemperatureData, 256>,
    electrical_buffer: Vec<ElectricalData, 512>,
    predictions: Vec<MaintenancePrediction, 10>,
    alerts: Vec<Alert, 20>,
    communication_manager: CommunicationManager,
    current_state: MachineState,
    data_processor: DataProcessor,
    alert_manager: AlertManager,
}

#[derive(Clone, Copy, Debug)]
enum MachineState {
    Startup,
    Normal,
    Warning,
    Critical,
    Maintenance,
    Offline,
}

// Data processing component
struct DataProcessor {
    fft_buffer: [f32; 512],
    analysis_window: u32,
    baseline_established: bool,
    baseline_vibration: u16,
    baseline_temperature: i16,
    trend_history: Vec<i16, 256>, // Historical trends
}

impl DataProcessor {
    pub fn new() -> Self {
        Self {
            fft_buffer: [0.0; 512],
            analysis_window: 100,
            baseline_established: false,
            baseline_vibration: 500, // 50 mG default
            baseline_temperature: 2500, // 25.0°C default
            trend_history: Vec::new(),
        }
    }

    /// Perform FFT analysis on vibration data
    pub fn analyze_vibration(&mut self, data: &[VibrationData]) -> AnalysisResult {
        let mut analysis = AnalysisResult::new();
        
        if data.len() < self.analysis_window as usize {
            return analysis;
        }
        
        // Calculate RMS vibration
        let mut rms_sum = 0u64;
        for sample in data.iter().take(self.analysis_window as usize) {
            let magnitude = ((sample.x_axis as u64 * sample.x_axis as u64) +
                           (sample.y_axis as u64 * sample.y_axis as u64) +
                           (sample.z_axis as u64 * sample.z_axis as u64)).sqrt() as u64;
            rms_sum += magnitude;
        }
        analysis.rms_vibration = (rms_sum / self.analysis_window as u64) as u16;
        
        // Establish baseline if not done
        if !self.baseline_established {
            self.baseline_vibration = analysis.rms_vibration;
            self.baseline_established = true;
            analysis.baseline_set = true;
        }
        
        // Calculate trend
        let vibration_change = ((analysis.rms_vibration as i32) - 
                               (self.baseline_vibration as i32)) * 100 / 
                               (self.baseline_vibration as i32);
        analysis.trend_percent = vibration_change as i16;
        
        // Perform frequency analysis (simplified)
        analysis.dominant_frequency = self.calculate_dominant_frequency(data);
        
        // Calculate bearing health
        analysis.bearing_health = self.calculate_bearing_health(analysis.rms_vibration);
        
        analysis
    }

    /// Calculate bearing health based on vibration analysis
    fn calculate_bearing_health(&self, rms_vibration: u16) -> u8 {
        if self.baseline_vibration == 0 {
            return 100;
        }
        
        let ratio = rms_vibration as f32 / self.baseline_vibration as f32;
        
        match ratio {
            ratio if ratio < 1.5 => 100,                        // Excellent
            ratio if ratio < 2.0 => 90,                         // Good
            ratio if ratio < 3.0 => 70,                         // Fair
            ratio if ratio < 5.0 => 50,                         // Poor
            ratio if ratio < 10.0 => 20,                        // Very poor
            _ => 0,                                            // Critical
        }
    }

    /// Calculate dominant frequency (simplified FFT)
    fn calculate_dominant_frequency(&self, data: &[VibrationData]) -> u16 {
        // Simplified frequency analysis
        // In a real implementation, this would perform actual FFT
        
        let mut max_amplitude = 0u32;
        let mut dominant_freq = 0u16;
        
        // Analyze frequency content
        for freq_mult in 1..50 { // Analyze up to 50 harmonics
            let target_freq = freq_mult * 10; // 10 Hz base frequency
            
            let mut amplitude = 0u32;
            for (i, sample) in data.iter().enumerate().take(100) {
                let phase = 2.0 * core::f32::consts::PI * target_freq * i as f32 / 100.0;
                let contribution = (sample.x_axis as f32 * phase.cos() +
                                  sample.y_axis as f32 * phase.sin()).abs() as u32;
                amplitude += contribution;
            }
            
            if amplitude > max_amplitude {
                max_amplitude = amplitude;
                dominant_freq = target_freq;
            }
        }
        
        dominant_freq
    }

    /// Process temperature data
    pub fn analyze_temperature(&mut self, data: &[TemperatureData]) -> TemperatureAnalysis {
        let mut analysis = TemperatureAnalysis::new();
        
        if data.is_empty() {
            return analysis;
        }
        
        // Calculate averages
        let mut bearing_sum = 0;
        let mut motor_sum = 0;
        let mut ambient_sum = 0;
        
        for sample in data {
            bearing_sum += sample.bearing_temp as i32;
            motor_sum += sample.motor_temp as i32;
            ambient_sum += sample.ambient_temp as i32;
        }
        
        analysis.avg_bearing_temp = (bearing_sum / data.len() as i32) as i16;
        analysis.avg_motor_temp = (motor_sum / data.len() as i32) as i16;
        analysis.avg_ambient_temp = (ambient_sum / data.len() as i32) as i16;
        
        // Calculate temperature rise above ambient
        analysis.bearing_rise = analysis.avg_bearing_temp - analysis.avg_ambient_temp;
        analysis.motor_rise = analysis.avg_motor_temp - analysis.avg_ambient_temp;
        
        // Detect overheating
        if analysis.avg_motor_temp > 3500 { // 35.0°C
            analysis.overheat_detected = true;
        }
        
        if analysis.bearing_rise > 1500 { // 15.0°C above ambient
            analysis.bearing_warning = true;
        }
        
        analysis
    }

    /// Predict maintenance requirements
    pub fn predict_maintenance(&mut self, 
                             vibration_analysis: &AnalysisResult,
                             temp_analysis: &TemperatureAnalysis) -> MaintenancePrediction {
        
        let mut prediction = MaintenancePrediction {
            bearing_health: vibration_analysis.bearing_health,
            motor_health: self.calculate_motor_health(temp_analysis),
            vibration_trend: vibration_analysis.trend_percent as i8,
            temperature_trend: 0,
            predicted_failure_days: 365, // Default 1 year
            recommended_action: String::new(),
            confidence_level: 80,
            timestamp: get_time().0,
        };
        
        // Calculate motor health based on temperature
        let motor_health = self.calculate_motor_health(temp_analysis);
        prediction.motor_health = motor_health;
        
        // Predict failure based on trends
        let mut days_to_failure = 365;
        
        if vibration_analysis.bearing_health < 50 {
            days_to_failure = 30; // Critical bearing condition
            prediction.recommended_action = String::from("Immediate bearing inspection");
            prediction.confidence_level = 95;
        } else if vibration_analysis.bearing_health < 70 {
            days_to_failure = 90; // Poor bearing condition
            prediction.recommended_action = String::from("Schedule bearing replacement");
            prediction.confidence_level = 85;
        } else if temp_analysis.overheat_detected {
            days_to_failure = 60; // Motor overheating
            prediction.recommended_action = String::from("Check cooling system");
            prediction.confidence_level = 90;
        } else {
            prediction.recommended_action = String::from("Continue normal operation");
            prediction.confidence_level = 80;
        }
        
        prediction.predicted_failure_days = days_to_failure;
        prediction
    }

    fn calculate_motor_health(&self, temp_analysis: &TemperatureAnalysis) -> u8 {
        let motor_rise = temp_analysis.motor_rise;
        
        match motor_rise {
            rise if rise < 1000 => 100,      // Normal operation
            rise if rise < 2000 => 90,       // Slightly elevated
            rise if rise < 3000 => 70,       // Warning level
            rise if rise < 4000 => 50,       // Critical level
            _ => 20,                        // Emergency
        }
    }
}

// Analysis results
#[derive(Clone, Copy, Debug)]
struct AnalysisResult {
    pub rms_vibration: u16,
    pub dominant_frequency: u16,
    pub trend_percent: i16,
    pub bearing_health: u8,
    pub baseline_set: bool,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self {
            rms_vibration: 0,
            dominant_frequency: 0,
            trend_percent: 0,
            bearing_health: 100,
            baseline_set: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct TemperatureAnalysis {
    pub avg_bearing_temp: i16,
    pub avg_motor_temp: i16,
    pub avg_ambient_temp: i16,
    pub bearing_rise: i16,
    pub motor_rise: i16,
    pub overheat_detected: bool,
    pub bearing_warning: bool,
}

impl TemperatureAnalysis {
    pub fn new() -> Self {
        Self {
            avg_bearing_temp: 0,
            avg_motor_temp: 0,
            avg_ambient_temp: 0,
            bearing_rise: 0,
            motor_rise: 0,
            overheat_detected: false,
            bearing_warning: false,
        }
    }
}

// Alert management system
struct AlertManager {
    alert_history: Vec<Alert, 100>,
    alert_counter: AtomicU32,
}

impl AlertManager {
    pub fn new() -> Self {
        Self {
            alert_history: Vec::new(),
            alert_counter: AtomicU32::new(1),
        }
    }

    pub fn create_alert(&mut self, 
                       severity: AlertSeverity,
                       category: AlertCategory,
                       message: &str) -> Alert {
        
        let alert_id = self.alert_counter.fetch_add(1, Ordering::Relaxed);
        let timestamp = get_time().0;
        
        let alert = Alert {
            alert_id,
            severity,
            category,
            message: String::from(message),
            timestamp,
            acknowledged: false,
        };
        
        // Add to history
        if self.alert_history.len() >= 100 {
            self.alert_history.remove(0); // Remove oldest
        }
        self.alert_history.push(alert).unwrap_or(());
        
        alert
    }

    pub fn get_active_alerts(&self) -> Vec<&Alert, 20> {
        let mut active_alerts = Vec::new();
        
        for alert in &self.alert_history {
            if !alert.acknowledged && 
               (get_time().0 - alert.timestamp) < 3600 { // Last hour
                if active_alerts.len() < 20 {
                    active_alerts.push(alert).unwrap_or(());
                }
            }
        }
        
        active_alerts
    }
}

impl IndustrialIoTApp {
    pub fn new(machine_info: MachineConfig) -> Self {
        Self {
            machine_info,
            vibration_buffer: Vec::new(),
            temperature_buffer: Vec::new(),
            electrical_buffer: Vec::new(),
            predictions: Vec::new(),
            alerts: Vec::new(),
            communication_manager: CommunicationManager::new(),
            current_state: MachineState::Startup,
            data_processor: DataProcessor::new(),
            alert_manager: AlertManager::new(),
        }
    }

    /// Initialize the industrial IoT application
    pub fn init(&mut self) -> Result<(), IndustrialIoTError> {
        // Initialize hardware
        self.init_hardware()?;
        
        // Initialize sensors
        self.init_sensors()?;
        
        // Initialize communication
        self.init_communication()?;
        
        // Initialize data processing
        self.init_data_processing()?;
        
        // Setup interrupt handlers
        self.setup_interrupts()?;
        
        println!("\n🏭 Industrial IoT Monitoring System Initialized");
        println!("🆔 Machine ID: {}", self.machine_info.machine_id);
        println!("⚙️  Machine Type: {}", self.machine_info.machine_type);
        println!("⏱️  Operating Hours: {}", self.machine_info.operating_hours);
        println!("📊 Sampling Rate: {} Hz", self.machine_info.sampling_rate_hz);
        
        Ok(())
    }

    fn init_hardware(&self) -> Result<(), IndustrialIoTError> {
        let config = SystemConfig {
            core_frequency_hz: 100_000_000, // 100 MHz for high-speed processing
            memory_size: 512 * 1024,        // 512KB for data buffering
            interrupt_controller: InterruptType::PLIC,
            power_management: PowerMode::Normal,
        };
        
        init_system(config);
        
        // Configure high-speed ADC for vibration monitoring
        let adc_config = GpioConfig {
            pin_number: 0, // Vibration sensor X-axis
            mode: GpioMode::Analog,
            pull_type: PullType::None,
            drive_strength: DriveStrength::High,
        };
        GPIO_DRIVER.configure(adc_config);
        
        println!("✅ Hardware initialized for industrial monitoring");
        Ok(())
    }

    fn init_sensors(&mut self) -> Result<(), IndustrialIoTError> {
        // Initialize vibration sensor (accelerometer/gyroscope)
        self.init_vibration_sensor()?;
        
        // Initialize temperature sensors
        self.init_temperature_sensors()?;
        
        // Initialize electrical monitoring
        self.init_electrical_monitoring()?;
        
        println!("✅ Industrial sensors initialized");
        Ok(())
    }

    fn init_vibration_sensor(&self) -> Result<(), IndustrialIoTError> {
        // Initialize MPU6050 or compatible sensor via I2C
        I2C_DRIVER.start();
        I2C_DRIVER.write_byte(0x68 << 1); // MPU6050 address
        
        // Reset sensor
        I2C_DRIVER.write_byte(0x6B); // Power management register
        I2C_DRIVER.write_byte(0x80); // Reset bit
        I2C_DRIVER.stop();
        
        delay_ms(100);
        
        // Configure accelerometer
        I2C_DRIVER.start();
        I2C_DRIVER.write_byte(0x68 << 1);
        I2C_DRIVER.write_byte(0x1C); // Accelerometer config register
        I2C_DRIVER.write_byte(0x18); // ±16g range
        I2C_DRIVER.stop();
        
        // Configure gyroscope
        I2C_DRIVER.start();
        I2C_DRIVER.write_byte(0x68 << 1);
        I2C_DRIVER.write_byte(0x1B); // Gyroscope config register
        I2C_DRIVER.write_byte(0x18); // ±2000 dps range
        I2C_DRIVER.stop();
        
        Ok(())
    }

    fn init_temperature_sensors(&self) -> Result<(), IndustrialIoTError> {
        // Initialize multiple temperature sensors
        let sensor_configs = [
            (1, "Bearing Temperature"),    // GPIO1
            (2, "Motor Temperature"),      // GPIO2
            (3, "Ambient Temperature"),    // GPIO3
            (4, "Panel Temperature"),      // GPIO4
        ];
        
        for (pin, name) in sensor_configs {
            let config = GpioConfig {
                pin_number: pin,
                mode: GpioMode::Input,
                pull_type: PullType::Up,
                drive_strength: DriveStrength::Low,
            };
            GPIO_DRIVER.configure(config);
            println!("  - {} initialized", name);
        }
        
        Ok(())
    }

    fn init_electrical_monitoring(&self) -> Result<(), IndustrialIoTError> {
        // Initialize current and voltage sensors
        let sensor_configs = [
            (5, "Current Sensor"),  // ADC channel for current
            (6, "Voltage Sensor"),  // ADC channel for voltage
        ];
        
        for (channel, name) in sensor_configs {
            let config = GpioConfig {
                pin_number: channel,
                mode: GpioMode::Analog,
                pull_type: PullType::None,
                drive_strength: DriveStrength::Medium,
            };
            GPIO_DRIVER.configure(config);
            println!("  - {} initialized", name);
        }
        
        Ok(())
    }

    fn init_communication(&mut self) -> Result<(), IndustrialIoTError> {
        // Initialize industrial communication protocols
        #[cfg(feature = "ethernet")]
        {
            // Ethernet for high-speed data transfer
            println!("  - Initializing Ethernet connection");
            // Ethernet initialization would go here
        }
        
        #[cfg(feature = "wifi")]
        {
            // WiFi for flexible connectivity
            let uart = UART_DRIVER.borrow();
            let static_uart = unsafe { &*(uart as *const Uart) };
            
            self.communication_manager.init_wifi(static_uart, "IndustrialWiFi", "secure123")?;
            println!("  - WiFi connection established");
        }
        
        #[cfg(feature = "mqtt")]
        {
            // MQTT for industrial IoT platforms
            println!("  - Configuring MQTT for industrial data");
        }
        
        Ok(())
    }

    fn init_data_processing(&mut self) -> Result<(), IndustrialIoTError> {
        // Initialize data processing algorithms
        self.data_processor.analysis_window = 100; // 100 samples for analysis
        
        // Establish baseline measurements
        println!("  - Establishing baseline measurements...");
        
        for _ in 0..10 {
            self.collect_baseline_data();
            delay_ms(1000);
        }
        
        println!("  - Baseline established successfully");
        Ok(())
    }

    fn collect_baseline_data(&mut self) {
        // Collect baseline data for calibration
        if let Some(vibration) = self.read_vibration_data() {
            self.vibration_buffer.push(vibration);
        }
        
        if let Some(temperature) = self.read_temperature_data() {
            self.temperature_buffer.push(temperature);
        }
    }

    fn setup_interrupts(&self) -> Result<(), IndustrialIoTError> {
        // Setup high-frequency interrupts for vibration monitoring
        unsafe {
            // Configure timer for vibration sampling
            let mut timer_config = core::ptr::read_volatile(0x200_0000 as *const u32);
            timer_config |= 0x01; // Enable timer
            core::ptr::write_volatile(0x200_0000 as *mut u32, timer_config);
            
            // Configure interrupt priorities
            // High priority for vibration monitoring
            // Medium priority for temperature monitoring
            // Low priority for data transmission
        }
        
        Ok(())
    }

    /// Main application loop
    pub fn run(&mut self) -> ! {
        let mut sample_counter = 0u32;
        
        loop {
            // High-frequency sampling for critical parameters
            if sample_counter % 10 == 0 {
                self.sample_vibration();
            }
            
            if sample_counter % 60 == 0 {
                self.sample_temperature();
            }
            
            if sample_counter % 600 == 0 {
                self.sample_electrical();
            }
            
            // Process data at appropriate intervals
            if sample_counter % 1000 == 0 {
                self.process_and_analyze();
            }
            
            // Handle alerts and predictions
            self.manage_alerts_and_predictions();
            
            // Transmit data periodically
            if sample_counter % (self.machine_info.transmission_interval * 10) == 0 {
                self.transmit_data();
            }
            
            sample_counter = sample_counter.wrapping_add(1);
            
            // Prevent integer overflow
            if sample_counter == 0 {
                sample_counter = 1;
            }
            
            // Small delay to prevent excessive CPU usage
            delay_ms(100);
        }
    }

    fn sample_vibration(&mut self) {
        if let Ok(data) = self.read_vibration_data() {
            self.vibration_buffer.push(data);
            
            // Keep buffer size manageable
            if self.vibration_buffer.len() > 1024 {
                self.vibration_buffer.remove(0);
            }
        }
    }

    fn sample_temperature(&mut self) {
        if let Ok(data) = self.read_temperature_data() {
            self.temperature_buffer.push(data);
            
            if self.temperature_buffer.len() > 256 {
                self.temperature_buffer.remove(0);
            }
        }
    }

    fn sample_electrical(&mut self) {
        if let Ok(data) = self.read_electrical_data() {
            self.electrical_buffer.push(data);
            
            if self.electrical_buffer.len() > 512 {
                self.electrical_buffer.remove(0);
            }
        }
    }

    fn read_vibration_data(&self) -> Result<VibrationData, IndustrialIoTError> {
        // Read from MPU6050 or similar sensor
        let mut data = VibrationData {
            x_axis: 0,
            y_axis: 0,
            z_axis: 0,
            gyro_x: 0,
            gyro_y: 0,
            gyro_z: 0,
            rms_vibration: 0,
            frequency_peak: 0,
            timestamp: get_time().0,
        };
        
        // Read accelerometer data (simplified)
        I2C_DRIVER.start();
        I2C_DRIVER.write_byte(0x68 << 1 | 1); // Read operation
        
        // X-axis acceleration
        data.x_axis = (I2C_DRIVER.read_byte(true) as i16) |
                     ((I2C_DRIVER.read_byte(true) as i16) << 8);
        
        // Y-axis acceleration
        data.y_axis = (I2C_DRIVER.read_byte(true) as i16) |
                     ((I2C_DRIVER.read_byte(true) as i16) << 8);
        
        // Z-axis acceleration
        data.z_axis = (I2C_DRIVER.read_byte(true) as i16) |
                     ((I2C_DRIVER.read_byte(true) as i16) << 8);
        
        I2C_DRIVER.stop();
        
        // Calculate RMS vibration
        let magnitude = ((data.x_axis as u32 * data.x_axis as u32) +
                        (data.y_axis as u32 * data.y_axis as u32) +
                        (data.z_axis as u32 * data.z_axis as u32)).sqrt();
        data.rms_vibration = magnitude as u16;
        
        Ok(data)
    }

    fn read_temperature_data(&self) -> Result<TemperatureData, IndustrialIoTError> {
        // Read from multiple temperature sensors
        let bearing_temp = self.read_temperature_sensor(1)?; // GPIO1
        let motor_temp = self.read_temperature_sensor(2)?;   // GPIO2
        let ambient_temp = self.read_temperature_sensor(3)?; // GPIO3
        let panel_temp = self.read_temperature_sensor(4)?;   // GPIO4
        
        Ok(TemperatureData {
            bearing_temp,
            motor_temp,
            ambient_temp,
            panel_temp,
            timestamp: get_time().0,
        })
    }

    fn read_temperature_sensor(&self, pin: u8) -> Result<i16, IndustrialIoTError> {
        let raw_value = ADC_DRIVER.read_channel(pin);
        
        // Convert ADC reading to temperature (simplified)
        // In practice, this would use sensor-specific calibration
        let temperature = 2500 + (raw_value as i16 - 2048) / 10; // 25°C + offset
        
        Ok(temperature)
    }

    fn read_electrical_data(&self) -> Result<ElectricalData, IndustrialIoTError> {
        let current_raw = ADC_DRIVER.read_channel(5); // Current sensor
        let voltage_raw = ADC_DRIVER.read_channel(6); // Voltage sensor
        
        // Convert to electrical values (simplified)
        let current_rms = (current_raw as u16) * 10 / 4095; // Scale to 0-10A
        let voltage_rms = (voltage_raw as u16) * 240 / 4095; // Scale to 0-240V
        
        Ok(ElectricalData {
            current_rms,
            voltage_rms,
            power_factor: 95, // Default 0.95
            harmonic_distortion: 50, // Default 5.0% THD
            frequency: 500, // Default 50.0 Hz
            timestamp: get_time().0,
        })
    }

    fn process_and_analyze(&mut self) {
        if self.vibration_buffer.is_empty() || self.temperature_buffer.is_empty() {
            return;
        }
        
        // Analyze vibration data
        let vibration_analysis = self.data_processor.analyze_vibration(&self.vibration_buffer);
        
        // Analyze temperature data
        let temp_analysis = self.data_processor.analyze_temperature(&self.temperature_buffer);
        
        // Generate maintenance prediction
        let prediction = self.data_processor.predict_maintenance(&vibration_analysis, &temp_analysis);
        self.predictions.push(prediction).unwrap_or(());
        
        // Check for critical conditions
        self.check_critical_conditions(&vibration_analysis, &temp_analysis);
        
        println!("🏭 Analysis: Bearing Health={}%, Motor Health={}%, Vibration={}mG",
                vibration_analysis.bearing_health,
                prediction.motor_health,
                vibration_analysis.rms_vibration / 10);
    }

    fn check_critical_conditions(&mut self, 
                                vibration: &AnalysisResult,
                                temperature: &TemperatureAnalysis) {
        
        // Vibration threshold check
        if vibration.rms_vibration > self.machine_info.vibration_threshold {
            let alert = self.alert_manager.create_alert(
                AlertSeverity::Critical,
                AlertCategory::Vibration,
                &format!("Vibration threshold exceeded: {} mG", vibration.rms_vibration / 10)
            );
            self.alerts.push(alert).unwrap_or(());
        }
        
        // Temperature checks
        if temperature.avg_motor_temp > self.machine_info.temperature_critical {
            let alert = self.alert_manager.create_alert(
                AlertSeverity::Emergency,
                AlertCategory::Temperature,
                &format!("Motor temperature critical: {}°C", temperature.avg_motor_temp as f32 / 10.0)
            );
            self.alerts.push(alert).unwrap_or(());
        }
        
        if temperature.bearing_rise > 1500 { // 15°C above ambient
            let alert = self.alert_manager.create_alert(
                AlertSeverity::Warning,
                AlertCategory::Temperature,
                &format!("Bearing temperature elevated: {}°C rise", temperature.bearing_rise as f32 / 10.0)
            );
            self.alerts.push(alert).unwrap_or(());
        }
    }

    fn manage_alerts_and_predictions(&mut self) {
        let active_alerts = self.alert_manager.get_active_alerts();
        
        if !active_alerts.is_empty() {
            println!("🚨 Active Alerts: {}", active_alerts.len());
            
            for alert in active_alerts.iter().take(3) {
                println!("  - [{}] {}: {}", 
                        match alert.severity {
                            AlertSeverity::Emergency => "EMERGENCY",
                            AlertSeverity::Critical => "CRITICAL",
                            AlertSeverity::Warning => "WARNING",
                            AlertSeverity::Info => "INFO",
                        },
                        match alert.category {
                            AlertCategory::Vibration => "Vibration",
                            AlertCategory::Temperature => "Temperature",
                            AlertCategory::Electrical => "Electrical",
                            AlertCategory::Maintenance => "Maintenance",
                            AlertCategory::Communication => "Communication",
                            AlertCategory::System => "System",
                        },
                        alert.message);
            }
        }
    }

    fn transmit_data(&mut self) {
        // Prepare comprehensive data package
        let mut data_package = String::<256>::new();
        
        // Machine status
        write!(&mut data_package, 
               "{{\"machine_id\":\"{}\",\"timestamp\":{},\"state\":\"{:?}\",\"hours\":{},", 
               self.machine_info.machine_id,
               get_time().0,
               self.current_state,
               self.machine_info.operating_hours).unwrap();
        
        // Latest vibration data
        if let Some(&vibration) = self.vibration_buffer.last() {
            write!(&mut data_package, 
                   "\"vibration\":{{\"rms\":{},\"frequency\":{},\"bearing_health\":{}}}",
                   vibration.rms_vibration, vibration.frequency_peak, 
                   self.data_processor.bearing_health).unwrap();
        }
        
        data_package.push('}');
        
        // Transmit via available protocols
        #[cfg(feature = "mqtt")]
        {
            let topic = format!("industrial/{}/data", self.machine_info.machine_id);
            if let Ok(_) = self.communication_manager.send_message(
                data_package.as_bytes(),
                CommunicationProtocol::MQTT
            ) {
                println!("📡 Industrial data transmitted");
            }
        }
    }
}

// Error types
#[derive(Debug)]
pub enum IndustrialIoTError {
    HardwareInitFailed,
    SensorInitFailed,
    CommunicationError,
    DataProcessingError,
    InvalidConfiguration,
}

// RISC-V entry point
#[no_mangle]
pub extern "C" fn main() -> ! {
    // Initialize system
    let config = SystemConfig {
        core_frequency_hz: 100_000_000,
        memory_size: 512 * 1024,
        interrupt_controller: InterruptType::PLIC,
        power_management: PowerMode::Normal,
    };
    init_system(config);
    
    // Machine configuration
    let machine_info = MachineConfig {
        machine_id: String::from("CNC-MACHINE-001"),
        machine_type: String::from("CNC Mill"),
        operating_hours: 12456,
        maintenance_schedule: 90, // 90 days
        vibration_threshold: 2000, // 200 mG
        temperature_warning: 3000, // 30.0°C
        temperature_critical: 4000, // 40.0°C
        current_threshold: 150, // 15.0A
        sampling_rate_hz: 1000, // 1 kHz
        transmission_interval: 60, // 1 minute
    };
    
    // Create and initialize application
    let mut app = IndustrialIoTApp::new(machine_info);
    
    if let Ok(_) = app.init() {
        app.run();
    } else {
        println!("❌ Failed to initialize industrial IoT system");
        loop {}
    }
}