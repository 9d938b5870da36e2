//! MultiOS Driver Testing and Validation Framework
//!
//! This crate provides comprehensive testing, validation, and debugging tools for device drivers
//! in the MultiOS operating system. It includes hardware simulation, stress testing,
//! performance benchmarking, automated validation, and debugging capabilities.
//!
//! # Key Features
//!
//! - **Hardware Simulation**: Simulated hardware environments for testing without physical devices
//! - **Stress Testing**: Comprehensive stress testing to identify stability issues
//! - **Performance Benchmarking**: Detailed performance metrics and analysis
//! - **Automated Validation**: Automated driver validation against specifications
//! - **Debugging Tools**: Advanced debugging and diagnostic capabilities
//! - **System Troubleshooting**: Tools for diagnosing driver-related system issues
//!
//! # Quick Start
//!
//! ```rust
//! use driver_testing_framework::{
//!     init_testing_framework, DriverTestSuite, SimulationEnvironment,
//!     ValidationConfig, StressTestConfig
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Initialize the testing framework
//!     let mut test_suite = DriverTestSuite::new()
//!         .with_validation_config(ValidationConfig::default())
//!         .with_stress_test_config(StressTestConfig::default())
//!         .with_simulation_environment(SimulationEnvironment::default());
//!
//!     // Run comprehensive driver tests
//!     test_suite.run_all_tests().await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

use core::fmt;
use spin::Mutex;
use once_cell::sync::Lazy;

// Core modules
pub mod core;
pub mod simulation;
pub mod stress_testing;
pub mod performance;
pub mod validation;
pub mod debugging;
pub mod troubleshooting;
pub mod reporting;
pub mod utils;

// Integration modules
#[cfg(feature = "device-drivers-bridge")]
pub mod integration;

// Re-export core types
pub use crate::core::{
    DriverTestError, TestResult, TestStatus, TestConfig, DriverTest,
};

// Re-export integration types
#[cfg(feature = "device-drivers-bridge")]
pub use crate::integration::{
    DeviceDriversTestBridge,
    DeviceDriversIntegrationConfig,
    ComprehensiveTestResults,
    IntegrationStatistics,
    AdvancedTestSuiteBuilder,
};

/// Global testing framework instance
pub static TESTING_FRAMEWORK: Lazy<Mutex<Option<DriverTestSuite>>> = 
    Lazy::new(|| Mutex::new(None));

/// Initialize the driver testing framework
#[cfg(feature = "std")]
pub fn init_testing_framework() -> Result<(), DriverTestError> {
    let mut framework = TESTING_FRAMEWORK.lock();
    if framework.is_some() {
        return Err(DriverTestError::AlreadyInitialized);
    }
    
    *framework = Some(DriverTestSuite::new());
    Ok(())
}

/// Get the global testing framework instance
pub fn get_testing_framework() -> Option<DriverTestSuite> {
    let framework = TESTING_FRAMEWORK.lock();
    framework.clone()
}

/// Main driver test suite orchestrator
#[derive(Clone)]
pub struct DriverTestSuite {
    /// Validation configuration
    validation_config: ValidationConfig,
    
    /// Stress testing configuration
    stress_test_config: StressTestConfig,
    
    /// Performance benchmarking configuration
    performance_config: PerformanceConfig,
    
    /// Hardware simulation environment
    simulation_environment: SimulationEnvironment,
    
    /// Debugging configuration
    debugging_config: DebuggingConfig,
}

impl DriverTestSuite {
    /// Create a new test suite with default configuration
    pub fn new() -> Self {
        Self {
            validation_config: ValidationConfig::default(),
            stress_test_config: StressTestConfig::default(),
            performance_config: PerformanceConfig::default(),
            simulation_environment: SimulationEnvironment::default(),
            debugging_config: DebuggingConfig::default(),
        }
    }
    
    /// Configure validation settings
    pub fn with_validation_config(mut self, config: ValidationConfig) -> Self {
        self.validation_config = config;
        self
    }
    
    /// Configure stress testing settings
    pub fn with_stress_test_config(mut self, config: StressTestConfig) -> Self {
        self.stress_test_config = config;
        self
    }
    
    /// Configure performance benchmarking settings
    pub fn with_performance_config(mut self, config: PerformanceConfig) -> Self {
        self.performance_config = config;
        self
    }
    
    /// Configure hardware simulation environment
    pub fn with_simulation_environment(mut self, env: SimulationEnvironment) -> Self {
        self.simulation_environment = env;
        self
    }
    
    /// Configure debugging settings
    pub fn with_debugging_config(mut self, config: DebuggingConfig) -> Self {
        self.debugging_config = config;
        self
    }
    
    /// Run all driver tests
    #[cfg(feature = "std")]
    pub async fn run_all_tests(&mut self) -> Result<TestResults, DriverTestError> {
        use crate::validation::DriverValidator;
        use crate::stress_testing::StressTester;
        use crate::performance::PerformanceBenchmarker;
        use crate::simulation::HardwareSimulator;
        
        let mut results = TestResults::new();
        
        // Initialize hardware simulation environment
        let mut simulator = HardwareSimulator::new(self.simulation_environment.clone());
        simulator.initialize()?;
        
        log::info!("Starting comprehensive driver testing suite");
        
        // 1. Run validation tests
        log::info!("Running validation tests...");
        let mut validator = DriverValidator::new(self.validation_config.clone());
        let validation_results = validator.run_validation_tests().await?;
        results.add_results("validation", validation_results);
        
        // 2. Run stress tests
        log::info!("Running stress tests...");
        let mut stress_tester = StressTester::new(self.stress_test_config.clone());
        let stress_results = stress_tester.run_stress_tests(&simulator).await?;
        results.add_results("stress", stress_results);
        
        // 3. Run performance benchmarks
        log::info!("Running performance benchmarks...");
        let mut benchmarker = PerformanceBenchmarker::new(self.performance_config.clone());
        let performance_results = benchmarker.run_benchmarks(&simulator).await?;
        results.add_results("performance", performance_results);
        
        // 4. Run debugging analysis
        log::info!("Running debugging analysis...");
        let debugging_results = self.run_debugging_analysis(&simulator).await?;
        results.add_results("debugging", debugging_results);
        
        // Generate comprehensive report
        let report = self.generate_test_report(&results)?;
        
        log::info!("Driver testing suite completed");
        println!("{}", report);
        
        Ok(results)
    }
    
    /// Run debugging analysis
    async fn run_debugging_analysis(&mut self, simulator: &HardwareSimulator) 
        -> Result<Vec<TestResult>, DriverTestError> {
        use crate::debugging::DriverDebugger;
        use crate::troubleshooting::SystemTroubleshooter;
        
        let mut results = Vec::new();
        
        // Run driver debugging analysis
        let debugger = DriverDebugger::new(self.debugging_config.clone());
        let debugging_results = debugger.analyze_drivers(simulator).await?;
        results.extend(debugging_results);
        
        // Run system troubleshooting
        let troubleshooter = SystemTroubleshooter::new();
        let troubleshooting_results = troubleshooter.diagnose_system_issues(simulator).await?;
        results.extend(troubleshooting_results);
        
        Ok(results)
    }
    
    /// Generate comprehensive test report
    fn generate_test_report(&self, results: &TestResults) -> Result<String, DriverTestError> {
        use crate::reporting::ReportGenerator;
        
        let generator = ReportGenerator::new();
        generator.generate_comprehensive_report(results)
    }
    
    /// Run a specific test category
    pub async fn run_test_category(&mut self, category: TestCategory) 
        -> Result<Vec<TestResult>, DriverTestError> {
        match category {
            TestCategory::Validation => self.run_validation_tests().await,
            TestCategory::StressTesting => self.run_stress_tests().await,
            TestCategory::Performance => self.run_performance_tests().await,
            TestCategory::Debugging => self.run_debugging_tests().await,
            TestCategory::Troubleshooting => self.run_troubleshooting_tests().await,
        }
    }
    
    /// Run validation tests
    async fn run_validation_tests(&mut self) -> Result<Vec<TestResult>, DriverTestError> {
        use crate::validation::DriverValidator;
        
        let mut validator = DriverValidator::new(self.validation_config.clone());
        validator.run_validation_tests().await
    }
    
    /// Run stress tests
    async fn run_stress_tests(&mut self) -> Result<Vec<TestResult>, DriverTestError> {
        use crate::stress_testing::StressTester;
        
        let simulator = HardwareSimulator::new(self.simulation_environment.clone());
        let mut stress_tester = StressTester::new(self.stress_test_config.clone());
        stress_tester.run_stress_tests(&simulator).await
    }
    
    /// Run performance tests
    async fn run_performance_tests(&mut self) -> Result<Vec<TestResult>, DriverTestError> {
        use crate::performance::PerformanceBenchmarker;
        
        let simulator = HardwareSimulator::new(self.simulation_environment.clone());
        let mut benchmarker = PerformanceBenchmarker::new(self.performance_config.clone());
        benchmarker.run_benchmarks(&simulator).await
    }
    
    /// Run debugging tests
    async fn run_debugging_tests(&mut self) -> Result<Vec<TestResult>, DriverTestError> {
        use crate::debugging::DriverDebugger;
        
        let simulator = HardwareSimulator::new(self.simulation_environment.clone());
        let debugger = DriverDebugger::new(self.debugging_config.clone());
        debugger.analyze_drivers(&simulator).await
    }
    
    /// Run troubleshooting tests
    async fn run_troubleshooting_tests(&mut self) -> Result<Vec<TestResult>, DriverTestError> {
        use crate::troubleshooting::SystemTroubleshooter;
        
        let simulator = HardwareSimulator::new(self.simulation_environment.clone());
        let troubleshooter = SystemTroubleshooter::new();
        troubleshooter.diagnose_system_issues(&simulator).await
    }
}

impl Default for DriverTestSuite {
    fn default() -> Self {
        Self::new()
    }
}

/// Test category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCategory {
    /// Validation testing
    Validation,
    /// Stress testing
    StressTesting,
    /// Performance benchmarking
    Performance,
    /// Debugging analysis
    Debugging,
    /// System troubleshooting
    Troubleshooting,
}

/// Configuration structures
pub struct ValidationConfig {
    /// Enable strict validation checks
    pub strict_validation: bool,
    /// Timeout for validation tests (seconds)
    pub validation_timeout: u64,
    /// Enable compliance checking
    pub compliance_checking: bool,
    /// Enable security validation
    pub security_validation: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_validation: true,
            validation_timeout: 30,
            compliance_checking: true,
            security_validation: true,
        }
    }
}

pub struct StressTestConfig {
    /// Maximum duration for stress tests (seconds)
    pub max_duration: u64,
    /// Number of concurrent operations
    pub concurrent_operations: usize,
    /// Memory pressure test intensity (0-100)
    pub memory_pressure: u8,
    /// CPU stress test intensity (0-100)
    pub cpu_stress: u8,
    /// Enable I/O stress testing
    pub io_stress: bool,
}

impl Default for StressTestConfig {
    fn default() -> Self {
        Self {
            max_duration: 300,
            concurrent_operations: 100,
            memory_pressure: 50,
            cpu_stress: 50,
            io_stress: true,
        }
    }
}

pub struct PerformanceConfig {
    /// Enable detailed performance metrics
    pub detailed_metrics: bool,
    /// Performance test duration (seconds)
    pub test_duration: u64,
    /// Enable micro-benchmarking
    pub micro_benchmarks: bool,
    /// Memory profiling
    pub memory_profiling: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            detailed_metrics: true,
            test_duration: 60,
            micro_benchmarks: true,
            memory_profiling: true,
        }
    }
}

pub struct SimulationEnvironment {
    /// Enable virtual hardware simulation
    pub virtual_hardware: bool,
    /// Enable network simulation
    pub network_simulation: bool,
    /// Enable storage simulation
    pub storage_simulation: bool,
    /// Enable interrupt simulation
    pub interrupt_simulation: bool,
    /// Simulation timing multiplier
    pub timing_multiplier: f64,
}

impl Default for SimulationEnvironment {
    fn default() -> Self {
        Self {
            virtual_hardware: true,
            network_simulation: true,
            storage_simulation: true,
            interrupt_simulation: true,
            timing_multiplier: 1.0,
        }
    }
}

pub struct DebuggingConfig {
    /// Enable detailed logging
    pub detailed_logging: bool,
    /// Enable memory tracking
    pub memory_tracking: bool,
    /// Enable performance tracing
    pub performance_tracing: bool,
    /// Debug verbosity level
    pub verbosity: u8,
}

impl Default for DebuggingConfig {
    fn default() -> Self {
        Self {
            detailed_logging: true,
            memory_tracking: true,
            performance_tracing: true,
            verbosity: 2,
        }
    }
}

/// Test results container
#[derive(Clone)]
pub struct TestResults {
    results: Vec<(String, Vec<TestResult>)>,
}

impl TestResults {
    fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }
    
    fn add_results(&mut self, category: &str, category_results: Vec<TestResult>) {
        self.results.push((category.to_string(), category_results));
    }
    
    /// Get total test count
    pub fn total_tests(&self) -> usize {
        self.results.iter().map(|(_, results)| results.len()).sum()
    }
    
    /// Get passed test count
    pub fn passed_tests(&self) -> usize {
        self.results.iter()
            .flat_map(|(_, results)| results.iter())
            .filter(|result| result.status == TestStatus::Passed)
            .count()
    }
    
    /// Get failed test count
    pub fn failed_tests(&self) -> usize {
        self.results.iter()
            .flat_map(|(_, results)| results.iter())
            .filter(|result| result.status == TestStatus::Failed)
            .count()
    }
    
    /// Get skipped test count
    pub fn skipped_tests(&self) -> usize {
        self.results.iter()
            .flat_map(|(_, results)| results.iter())
            .filter(|result| result.status == TestStatus::Skipped)
            .count()
    }
    
    /// Get all results by category
    pub fn get_results_by_category(&self, category: &str) -> Option<&Vec<TestResult>> {
        self.results.iter()
            .find(|(cat, _)| cat == category)
            .map(|(_, results)| results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_driver_test_suite_creation() {
        let suite = DriverTestSuite::new();
        assert!(suite.validation_config.strict_validation);
        assert_eq!(suite.validation_config.validation_timeout, 30);
    }
    
    #[test]
    fn test_test_results() {
        let mut results = TestResults::new();
        
        let test_result = TestResult {
            name: "test_validation".to_string(),
            status: TestStatus::Passed,
            duration: core::time::Duration::from_millis(100),
            message: "Validation passed".to_string(),
            category: TestCategory::Validation,
        };
        
        results.add_results("validation", vec![test_result]);
        
        assert_eq!(results.total_tests(), 1);
        assert_eq!(results.passed_tests(), 1);
        assert_eq!(results.failed_tests(), 0);
    }
}
