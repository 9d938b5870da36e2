//! Real Device Drivers Integration Example
//!
//! This example shows how to integrate the comprehensive driver testing framework
//! with the actual existing device-drivers crate testing infrastructure.

use driver_testing_framework::{
    integration::{
        DeviceDriversTestBridge, DeviceDriversIntegrationConfig,
        AdvancedTestSuiteBuilder, ComprehensiveTestResults
    },
    core::{TestCategory, TestStatus},
    simulation::SimulationEnvironment,
    stress_testing::StressTestConfig,
    performance::PerformanceBenchmarkConfig,
    validation::ValidationConfig,
    debugging::DebugConfig,
    debugging::DriverDebugger,
    troubleshooting::SystemDiagnosticTool
};

use crate::AdvancedDriverId;
use crate::AdvancedDriverError;
use crate::TestManager;
use crate::TestSuite;
use crate::Test;
use crate::TestResult as LegacyTestResult;
use crate::TestCategory as LegacyTestCategory;
use crate::TestType as LegacyTestType;

use alloc::vec::Vec;
use alloc::string::{String, ToString};
use core::time::Duration;

/// Complete integration example with real device-drivers infrastructure
pub async fn complete_device_drivers_integration() -> Result<(), Box<dyn core::error::Error>> {
    println!("=== Complete Device Drivers Integration Example ===");

    // Step 1: Create advanced integration configuration
    let integration_config = DeviceDriversIntegrationConfig {
        enable_legacy_compatibility: true,
        auto_generate_tests: true,
        bridge_timeout_ms: 15000,
        enable_advanced_features: true,
    };

    // Step 2: Create and configure the integration bridge
    let mut bridge = DeviceDriversTestBridge::new(integration_config);

    // Step 3: Create legacy test manager (from device-drivers crate)
    let mut legacy_test_manager = TestManager::new();

    // Step 4: Set up legacy test suites (simulating existing device-drivers tests)
    setup_legacy_test_suites(&mut legacy_test_manager)?;

    // Step 5: Configure bridge with legacy compatibility
    bridge.setup_legacy_compatibility(legacy_test_manager);

    // Step 6: Set up advanced testing configurations
    let simulation_env = SimulationEnvironment::default();
    let stress_config = StressTestConfig::default()
        .with_memory_stress_enabled(true)
        .with_cpu_stress_enabled(true)
        .with_concurrent_operation_tests_enabled(true)
        .with_resource_limit_tests_enabled(true);
    
    let performance_config = PerformanceBenchmarkConfig::default()
        .with_latency_measurement_enabled(true)
        .with_throughput_measurement_enabled(true)
        .with_memory_usage_profiling_enabled(true)
        .with_cpu_usage_profiling_enabled(true);
    
    let validation_config = ValidationConfig::default()
        .with_driver_api_compliance_enabled(true)
        .with_resource_management_validation_enabled(true)
        .with_error_handling_validation_enabled(true);
    
    let debug_config = DebugConfig::default()
        .with_state_inspection_enabled(true)
        .with_logging_enabled(true)
        .with_tracing_enabled(true);

    // Step 7: Create advanced test suite builder
    let advanced_suite_builder = AdvancedTestSuiteBuilder::new(integration_config)
        .with_simulation_env(simulation_env)
        .with_stress_config(stress_config)
        .with_performance_config(performance_config)
        .with_validation_config(validation_config)
        .with_debug_config(debug_config);

    // Step 8: Test different driver types
    let test_drivers = vec![
        AdvancedDriverId(1), // Serial driver
        AdvancedDriverId(2), // Keyboard driver
        AdvancedDriverId(3), // Timer driver
        AdvancedDriverId(4), // Storage driver
        AdvancedDriverId(5), // Network driver
    ];

    let mut all_results = Vec::new();

    for (index, driver_id) in test_drivers.iter().enumerate() {
        println!("\n--- Testing Driver {}: {:?} ---", index + 1, driver_id);

        // Run comprehensive tests combining legacy and advanced capabilities
        let driver_results = bridge.run_comprehensive_tests(*driver_id, Some("device_basic_tests")).await?;
        
        // Also run driver-specific advanced tests
        let advanced_results = advanced_suite_builder.build_and_run(*driver_id).await?;

        // Combine results
        let mut combined_results = driver_results;
        combined_results.merge(advanced_results);
        
        // Perform additional driver-specific testing
        await_driver_specific_tests(*driver_id, &bridge).await?;

        all_results.push(combined_results.clone());
        
        // Display immediate results
        display_driver_results(*driver_id, &combined_results);
    }

    // Step 9: Generate comprehensive test report
    generate_comprehensive_report(&all_results)?;

    // Step 10: Display integration statistics
    display_integration_statistics(&bridge)?;

    println!("\nâœ… Complete device drivers integration finished successfully!");
    
    Ok(())
}

/// Set up legacy test suites simulating existing device-drivers tests
fn setup_legacy_test_suites(manager: &mut TestManager) -> Result<(), AdvancedDriverError> {
    // Basic device functionality tests
    let basic_device_tests = TestSuite {
        name: "device_basic_tests",
        description: "Basic device driver functionality tests",
        tests: vec![
            Test {
                name: "device_initialization",
                test_type: LegacyTestType::Unit,
                category: LegacyTestCategory::Initialization,
                timeout_ms: 1000,
                critical: true,
                enabled: true,
                test_func: |context| {
                    context.custom_data.insert("init_status".to_string(), "success".to_string());
                    LegacyTestResult::Pass
                },
            },
            Test {
                name: "device_operations",
                test_type: LegacyTestType::Unit,
                category: LegacyTestCategory::Operations,
                timeout_ms: 2000,
                critical: true,
                enabled: true,
                test_func: |context| {
                    context.custom_data.insert("operations_performed".to_string(), "read,write".to_string());
                    LegacyTestResult::Pass
                },
            },
            Test {
                name: "device_error_handling",
                test_type: LegacyTestType::Unit,
                category: LegacyTestCategory::ErrorHandling,
                timeout_ms: 1500,
                critical: false,
                enabled: true,
                test_func: |context| {
                    context.custom_data.insert("error_handled".to_string(), "true".to_string());
                    LegacyTestResult::Pass
                },
            },
        ],
        setup_func: None,
        teardown_func: None,
    };

    // Performance tests
    let performance_tests = TestSuite {
        name: "device_performance_tests",
        description: "Device driver performance tests",
        tests: vec![
            Test {
                name: "throughput_test",
                test_type: LegacyTestType::Performance,
                category: LegacyTestCategory::Performance,
                timeout_ms: 5000,
                critical: false,
                enabled: true,
                test_func: |context| {
                    for i in 0..1000 {
                        context.custom_data.insert(format!("operation_{}", i), "completed".to_string());
                    }
                    LegacyTestResult::Pass
                },
            },
            Test {
                name: "latency_test",
                test_type: LegacyTestType::Performance,
                category: LegacyTestCategory::Performance,
                timeout_ms: 3000,
                critical: false,
                enabled: true,
                test_func: |context| {
                    // Simulate latency measurements
                    for i in 0..100 {
                        context.custom_data.insert(format!("latency_measurement_{}", i), "measured".to_string());
                    }
                    LegacyTestResult::Pass
                },
            },
        ],
        setup_func: None,
        teardown_func: None,
    };

    // Stress tests
    let stress_tests = TestSuite {
        name: "device_stress_tests",
        description: "Device driver stress tests",
        tests: vec![
            Test {
                name: "load_test",
                test_type: LegacyTestType::Stress,
                category: LegacyTestCategory::Stress,
                timeout_ms: 10000,
                critical: true,
                enabled: true,
                test_func: |context| {
                    // Simulate heavy load
                    for i in 0..10000 {
                        context.custom_data.insert(format!("stress_operation_{}", i), "completed".to_string());
                    }
                    LegacyTestResult::Pass
                },
            },
            Test {
                name: "concurrent_access_test",
                test_type: LegacyTestType::Stress,
                category: LegacyTestCategory::Stress,
                timeout_ms: 8000,
                critical: true,
                enabled: true,
                test_func: |context| {
                    // Simulate concurrent access patterns
                    for i in 0..50 {
                        context.custom_data.insert(format!("concurrent_op_{}", i), "thread_safe".to_string());
                    }
                    LegacyTestResult::Pass
                },
            },
        ],
        setup_func: None,
        teardown_func: None,
    };

    // Register all test suites
    manager.register_test_suite(basic_device_tests)?;
    manager.register_test_suite(performance_tests)?;
    manager.register_test_suite(stress_tests)?;

    println!("Legacy test suites registered successfully");
    Ok(())
}

/// Perform additional driver-specific testing
async fn await_driver_specific_tests(
    driver_id: AdvancedDriverId, 
    bridge: &DeviceDriversTestBridge
) -> Result<(), Box<dyn core::error::Error>> {
    
    // Create device-specific simulations
    let device_type = match driver_id.0 {
        1 => "serial",
        2 => "keyboard", 
        3 => "timer",
        4 => "storage",
        5 => "network",
        _ => "generic",
    };

    let simulation_result = bridge.create_advanced_simulation(driver_id, device_type).await?;
    println!("  Advanced simulation: {}", simulation_result.details);

    // Perform debugging if enabled
    let debug_config = DebugConfig::default();
    let debugger = DriverDebugger::new(debug_config);
    let debug_session = debugger.start_debug_session(driver_id).await?;
    let debug_result = debug_session.get_driver_state().await?;
    println!("  Debug info: {} state variables", debug_result.state_variables.len());

    // Perform troubleshooting diagnostics
    let diagnostic_tool = SystemDiagnosticTool::new();
    let diagnostic_result = diagnostic_tool.run_driver_diagnostics(driver_id).await?;
    println!("  Diagnostic: {} checks performed, {} issues found", 
        diagnostic_result.total_checks, diagnostic_result.issues_found.len());

    Ok(())
}

/// Display driver-specific test results
fn display_driver_results(driver_id: AdvancedDriverId, results: &ComprehensiveTestResults) {
    println!("  Test Summary:");
    println!("    Total tests: {}", results.total_tests());
    println!("    Passed: {}", results.passed_tests());
    println!("    Failed: {}", results.failed_tests());
    
    // Legacy results details
    if !results.legacy_results.is_empty() {
        println!("  Legacy Tests:");
        for result in &results.legacy_results {
            let status_symbol = match result.status {
                TestStatus::Passed => "âœ“",
                TestStatus::Failed => "âœ—",
                TestStatus::Skipped => "â—‹",
                _ => "?",
            };
            println!("    {} {} ({}ms)", status_symbol, result.name, result.duration.as_millis());
        }
    }

    // Simulation results
    if !results.simulation_results.is_empty() {
        println!("  Simulations:");
        for sim in &results.simulation_results {
            let status_symbol = if sim.success { "âœ“" } else { "âœ—" };
            println!("    {} {}", status_symbol, sim.details);
        }
    }

    // Performance summary
    if !results.performance_results.is_empty() {
        println!("  Performance:");
        let avg_latency: u64 = results.performance_results.iter()
            .map(|r| r.latency_ns)
            .sum::<u64>() / results.performance_results.len() as u64;
        let avg_throughput: u64 = results.performance_results.iter()
            .map(|r| r.throughput_ops_per_sec)
            .sum::<u64>() / results.performance_results.len() as u64;
        println!("    Avg Latency: {}ns, Avg Throughput: {} ops/sec", avg_latency, avg_throughput);
    }
}

/// Generate comprehensive test report
fn generate_comprehensive_report(all_results: &[ComprehensiveTestResults]) -> Result<(), Box<dyn core::error::Error>> {
    println!("\n=== Comprehensive Test Report ===");
    
    let total_drivers = all_results.len();
    let total_tests: usize = all_results.iter().map(|r| r.total_tests()).sum();
    let total_passed: usize = all_results.iter().map(|r| r.passed_tests()).sum();
    let total_failed: usize = all_results.iter().map(|r| r.failed_tests()).sum();
    
    println!("Overall Summary:");
    println!("  Drivers tested: {}", total_drivers);
    println!("  Total tests executed: {}", total_tests);
    println!("  Tests passed: {} ({:.1}%)", total_passed, (total_passed as f64 / total_tests as f64) * 100.0);
    println!("  Tests failed: {} ({:.1}%)", total_failed, (total_failed as f64 / total_tests as f64) * 100.0);
    
    // Driver-specific breakdown
    println!("\nPer-Driver Breakdown:");
    for (i, results) in all_results.iter().enumerate() {
        let pass_rate = if results.total_tests() > 0 {
            (results.passed_tests() as f64 / results.total_tests() as f64) * 100.0
        } else {
            0.0
        };
        println!("  Driver {}: {}/{} tests passed ({:.1}%)", 
            i + 1, results.passed_tests(), results.total_tests(), pass_rate);
    }

    // Performance summary
    let all_performance_results: Vec<_> = all_results.iter()
        .flat_map(|r| r.performance_results.iter())
        .collect();
    
    if !all_performance_results.is_empty() {
        let avg_latency: u64 = all_performance_results.iter()
            .map(|r| r.latency_ns)
            .sum::<u64>() / all_performance_results.len() as u64;
        let avg_throughput: u64 = all_performance_results.iter()
            .map(|r| r.throughput_ops_per_sec)
            .sum::<u64>() / all_performance_results.len() as u64;
        
        println!("\nPerformance Summary:");
        println!("  Average latency: {}ns", avg_latency);
        println!("  Average throughput: {} ops/sec", avg_throughput);
    }

    Ok(())
}

/// Display integration statistics
fn display_integration_statistics(bridge: &DeviceDriversTestBridge) -> Result<(), Box<dyn core::error::Error>> {
    let stats = bridge.get_integration_statistics();
    
    println!("\n=== Integration Statistics ===");
    println!("Legacy compatibility: {}", if stats.legacy_compatibility_enabled { "Enabled" } else { "Disabled" });
    println!("Advanced features: {}", if stats.advanced_features_enabled { "Enabled" } else { "Disabled" });
    println!("Simulation environment: {}", if stats.has_simulation_env { "Available" } else { "Not configured" });
    println!("Stress testing: {}", if stats.has_stress_config { "Configured" } else { "Not configured" });
    println!("Performance benchmarking: {}", if stats.has_performance_config { "Configured" } else { "Not configured" });
    println!("Validation: {}", if stats.has_validation_config { "Configured" } else { "Not configured" });
    println!("Debugging: {}", if stats.has_debug_config { "Configured" } else { "Not configured" });
    
    let enabled_features = vec![
        stats.legacy_compatibility_enabled,
        stats.advanced_features_enabled,
        stats.has_simulation_env,
        stats.has_stress_config,
        stats.has_performance_config,
        stats.has_validation_config,
        stats.has_debug_config,
    ].into_iter().filter(|&x| x).count();
    
    println!("Total features enabled: {}/7", enabled_features);

    Ok(())
}

/// Main function for the complete integration example
#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting complete device drivers integration example...\n");
    
    match complete_device_drivers_integration().await {
        Ok(_) => {
            println!("\nðŸŽ‰ Integration example completed successfully!");
            println!("All tests executed and results generated.");
        },
        Err(e) => {
            println!("\nâŒ Integration example failed: {}", e);
            return Err(e);
        }
    }
    
    Ok(())
}

/// Test function for no_std environments
#[cfg(not(feature = "std"))]
pub fn main() -> Result<(), Box<dyn core::error::Error>> {
    println!("Running device drivers integration example in no_std environment...");
    
    // Simplified version for bare metal environments
    let config = DeviceDriversIntegrationConfig::default();
    let bridge = DeviceDriversTestBridge::new(config);
    
    let stats = bridge.get_integration_statistics();
    println!("Integration bridge initialized with {} features enabled",
        stats.legacy_compatibility_enabled as u32 + stats.advanced_features_enabled as u32
    );
    
    println!("Device drivers integration example completed successfully!");
    Ok(())
}