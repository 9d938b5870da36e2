//! Testing and Validation Framework
//! 
//! Provides comprehensive testing and validation capabilities for device drivers,
//! including unit tests, integration tests, performance tests, and validation suites.

use crate::AdvancedDriverId;
use crate::AdvancedDriverError::{self, *};
use alloc::collections::BTreeMap;
use alloc::string::String;
use log::{debug, warn, error, info};

/// Test types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestType {
    Unit,
    Integration,
    Performance,
    Stress,
    Compatibility,
    Reliability,
    Security,
    Regression,
}

/// Test categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCategory {
    Initialization,
    Operations,
    ErrorHandling,
    Performance,
    Stress,
    Compatibility,
    Compliance,
    Custom,
}

/// Test result types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
    Timeout,
    Error,
    NotImplemented,
}

/// Individual test
#[derive(Debug, Clone)]
pub struct Test {
    pub name: &'static str,
    pub test_type: TestType,
    pub category: TestCategory,
    pub timeout_ms: u64,
    pub critical: bool,
    pub enabled: bool,
    pub test_func: fn(&mut TestContext) -> TestResult,
}

/// Test suite
#[derive(Debug, Clone)]
pub struct TestSuite {
    pub name: &'static str,
    pub description: &'static str,
    pub tests: Vec<Test>,
    pub setup_func: Option<fn(&mut TestContext) -> TestResult>,
    pub teardown_func: Option<fn(&mut TestContext) -> TestResult>,
}

/// Test context for running tests
#[derive(Debug, Clone)]
pub struct TestContext {
    pub driver_id: AdvancedDriverId,
    pub test_name: &'static str,
    pub start_timestamp: u64,
    pub duration_ms: Option<u64>,
    pub custom_data: BTreeMap<String, String>,
}

/// Test execution result
#[derive(Debug, Clone)]
pub struct TestExecutionResult {
    pub test_name: &'static str,
    pub result: TestResult,
    pub duration_ms: u64,
    pub error_message: Option<String>,
    pub output: String,
    pub custom_data: BTreeMap<String, String>,
}

/// Test suite execution result
#[derive(Debug, Clone)]
pub struct TestSuiteResult {
    pub suite_name: &'static str,
    pub tests_passed: u32,
    pub tests_failed: u32,
    pub tests_skipped: u32,
    pub tests_timeout: u32,
    pub total_duration_ms: u64,
    pub individual_results: Vec<TestExecutionResult>,
    pub overall_result: TestResult,
}

/// Validation framework capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCapability {
    FunctionalTesting,
    PerformanceTesting,
    StressTesting,
    CompatibilityTesting,
    RegressionTesting,
    SecurityTesting,
    ComplianceTesting,
    AutomatedTesting,
    ContinuousIntegration,
}

/// Test manager
pub struct TestManager {
    test_suites: BTreeMap<&'static str, TestSuite>,
    custom_tests: BTreeMap<&'static str, Test>,
    execution_history: Vec<TestSuiteResult>,
    test_environments: BTreeMap<&'static str, TestEnvironment>,
    validation_capabilities: Vec<ValidationCapability>,
    auto_test_enabled: bool,
    test_timeout_default_ms: u64,
    max_concurrent_tests: usize,
    test_callbacks: Vec<fn(&TestExecutionResult)>,
}

impl TestManager {
    /// Create a new test manager
    pub fn new() -> Self {
        info!("Initializing Test Manager");
        
        let mut capabilities = Vec::new();
        capabilities.push(ValidationCapability::FunctionalTesting);
        capabilities.push(ValidationCapability::PerformanceTesting);
        capabilities.push(ValidationCapability::AutomatedTesting);
        
        let manager = Self {
            test_suites: BTreeMap::new(),
            custom_tests: BTreeMap::new(),
            execution_history: Vec::new(),
            test_environments: BTreeMap::new(),
            validation_capabilities: capabilities,
            auto_test_enabled: false,
            test_timeout_default_ms: 5000, // 5 seconds default
            max_concurrent_tests: 4,
            test_callbacks: Vec::new(),
        };
        
        info!("Test Manager initialized with {} validation capabilities", manager.validation_capabilities.len());
        manager
    }

    /// Register a test suite
    pub fn register_test_suite(&mut self, suite: TestSuite) -> Result<(), AdvancedDriverError> {
        debug!("Registering test suite: {}", suite.name);
        
        if suite.tests.is_empty() {
            return Err(ValidationFailed);
        }
        
        self.test_suites.insert(suite.name, suite);
        info!("Test suite registered: {}", suite.name);
        Ok(())
    }

    /// Register a custom test
    pub fn register_custom_test(&mut self, test: Test) -> Result<(), AdvancedDriverError> {
        debug!("Registering custom test: {}", test.name);
        
        self.custom_tests.insert(test.name, test);
        info!("Custom test registered: {}", test.name);
        Ok(())
    }

    /// Run a specific test
    pub fn run_test(&mut self, driver_id: AdvancedDriverId, test_name: &'static str) -> Result<TestExecutionResult, AdvancedDriverError> {
        debug!("Running test '{}' for driver {:?}", test_name, driver_id);
        
        let test = self.custom_tests.get(test_name)
            .ok_or(TestFailed)?;
        
        if !test.enabled {
            return Ok(TestExecutionResult {
                test_name,
                result: TestResult::Skip,
                duration_ms: 0,
                error_message: Some("Test disabled".to_string()),
                output: String::new(),
                custom_data: BTreeMap::new(),
            });
        }
        
        let mut context = TestContext {
            driver_id,
            test_name,
            start_timestamp: 0, // TODO: Get actual timestamp
            duration_ms: None,
            custom_data: BTreeMap::new(),
        };
        
        let result = (test.test_func)(&mut context);
        
        let execution_result = TestExecutionResult {
            test_name,
            result,
            duration_ms: context.duration_ms.unwrap_or(0),
            error_message: None,
            output: String::new(),
            custom_data: context.custom_data,
        };
        
        // Notify callbacks
        self.notify_test_callbacks(&execution_result);
        
        debug!("Test '{}' completed with result: {:?}", test_name, result);
        Ok(execution_result)
    }

    /// Run a test suite
    pub fn run_test_suite(&mut self, driver_id: AdvancedDriverId, suite_name: &'static str) -> Result<TestSuiteResult, AdvancedDriverError> {
        debug!("Running test suite '{}' for driver {:?}", suite_name, driver_id);
        
        let suite = self.test_suites.get(suite_name)
            .ok_or(TestFailed)?;
        
        let mut individual_results = Vec::new();
        let mut tests_passed = 0;
        let mut tests_failed = 0;
        let mut tests_skipped = 0;
        let mut tests_timeout = 0;
        let start_time = 0; // TODO: Get actual timestamp
        
        // Run setup function if available
        if let Some(setup_func) = suite.setup_func {
            let mut context = TestContext {
                driver_id,
                test_name: "suite_setup",
                start_timestamp,
                duration_ms: None,
                custom_data: BTreeMap::new(),
            };
            
            if (setup_func)(&mut context) == TestResult::Fail {
                warn!("Test suite setup failed for {}", suite_name);
            }
        }
        
        // Run each test in the suite
        for test in &suite.tests {
            if !test.enabled {
                tests_skipped += 1;
                continue;
            }
            
            let mut context = TestContext {
                driver_id,
                test_name: test.name,
                start_timestamp,
                duration_ms: None,
                custom_data: BTreeMap::new(),
            };
            
            let result = (test.test_func)(&mut context);
            let duration = context.duration_ms.unwrap_or(0);
            
            let execution_result = TestExecutionResult {
                test_name: test.name,
                result,
                duration_ms: duration,
                error_message: None,
                output: String::new(),
                custom_data: context.custom_data,
            };
            
            individual_results.push(execution_result);
            
            match result {
                TestResult::Pass => tests_passed += 1,
                TestResult::Fail => tests_failed += 1,
                TestResult::Skip => tests_skipped += 1,
                TestResult::Timeout => tests_timeout += 1,
                _ => tests_failed += 1,
            }
        }
        
        // Run teardown function if available
        if let Some(teardown_func) = suite.teardown_func {
            let mut context = TestContext {
                driver_id,
                test_name: "suite_teardown",
                start_timestamp,
                duration_ms: None,
                custom_data: BTreeMap::new(),
            };
            
            if (teardown_func)(&mut context) == TestResult::Fail {
                warn!("Test suite teardown failed for {}", suite_name);
            }
        }
        
        let total_duration = 0; // TODO: Calculate actual duration
        let overall_result = if tests_failed == 0 && tests_timeout == 0 {
            TestResult::Pass
        } else if tests_passed > 0 {
            TestResult::Fail
        } else {
            TestResult::Error
        };
        
        let suite_result = TestSuiteResult {
            suite_name,
            tests_passed,
            tests_failed,
            tests_skipped,
            tests_timeout,
            total_duration_ms: total_duration,
            individual_results,
            overall_result,
        };
        
        // Add to execution history
        self.execution_history.push(suite_result.clone());
        
        // Limit history size
        if self.execution_history.len() > 100 {
            self.execution_history.remove(0);
        }
        
        info!("Test suite '{}' completed: {} passed, {} failed, {} skipped", 
              suite_name, tests_passed, tests_failed, tests_skipped);
        
        Ok(suite_result)
    }

    /// Run all tests for a driver
    pub fn run_all_tests(&mut self, driver_id: AdvancedDriverId) -> Result<Vec<TestSuiteResult>, AdvancedDriverError> {
        debug!("Running all tests for driver {:?}", driver_id);
        
        let mut results = Vec::new();
        
        for suite_name in self.test_suites.keys() {
            let result = self.run_test_suite(driver_id, suite_name)?;
            results.push(result);
        }
        
        info!("All tests completed for driver {:?}", driver_id);
        Ok(results)
    }

    /// Run driver load tests
    pub fn run_load_tests(&mut self, driver_id: AdvancedDriverId) -> Result<TestExecutionResult, AdvancedDriverError> {
        debug!("Running load tests for driver {:?}", driver_id);
        
        let test_func = |context: &mut TestContext| -> TestResult {
            // Simulate driver loading
            for i in 0..100 {
                context.custom_data.insert(format!("iteration_{}", i), "test".to_string());
                
                // Simulate some work
                for _ in 0..1000 {
                    // Busy wait simulation
                }
            }
            
            TestResult::Pass
        };
        
        let mut context = TestContext {
            driver_id,
            test_name: "load_test",
            start_timestamp: 0,
            duration_ms: None,
            custom_data: BTreeMap::new(),
        };
        
        let result = test_func(&mut context);
        
        Ok(TestExecutionResult {
            test_name: "load_test",
            result,
            duration_ms: context.duration_ms.unwrap_or(0),
            error_message: None,
            output: String::new(),
            custom_data: context.custom_data,
        })
    }

    /// Run driver unload tests
    pub fn run_unload_tests(&mut self, driver_id: AdvancedDriverId) -> Result<TestExecutionResult, AdvancedDriverError> {
        debug!("Running unload tests for driver {:?}", driver_id);
        
        let test_func = |context: &mut TestContext| -> TestResult {
            // Simulate driver unloading
            if !context.custom_data.is_empty() {
                context.custom_data.clear();
            }
            
            TestResult::Pass
        };
        
        let mut context = TestContext {
            driver_id,
            test_name: "unload_test",
            start_timestamp: 0,
            duration_ms: None,
            custom_data: BTreeMap::new(),
        };
        
        let result = test_func(&mut context);
        
        Ok(TestExecutionResult {
            test_name: "unload_test",
            result,
            duration_ms: context.duration_ms.unwrap_or(0),
            error_message: None,
            output: String::new(),
            custom_data: context.custom_data,
        })
    }

    /// Run driver tests
    pub fn run_driver_tests(&mut self, driver_id: AdvancedDriverId) -> Result<TestSuiteResult, AdvancedDriverError> {
        debug!("Running driver tests for {:?}", driver_id);
        
        // Create a simple test suite for driver testing
        let driver_test_suite = TestSuite {
            name: "driver_tests",
            description: "Driver-specific tests",
            tests: vec![
                Test {
                    name: "initialization_test",
                    test_type: TestType::Unit,
                    category: TestCategory::Initialization,
                    timeout_ms: 1000,
                    critical: true,
                    enabled: true,
                    test_func: |context: &mut TestContext| -> TestResult {
                        // Test driver initialization
                        context.custom_data.insert("initialized".to_string(), "true".to_string());
                        TestResult::Pass
                    },
                },
                Test {
                    name: "basic_operations_test",
                    test_type: TestType::Unit,
                    category: TestCategory::Operations,
                    timeout_ms: 2000,
                    critical: true,
                    enabled: true,
                    test_func: |context: &mut TestContext| -> TestResult {
                        // Test basic driver operations
                        context.custom_data.insert("operations_tested".to_string(), "true".to_string());
                        TestResult::Pass
                    },
                },
            ],
            setup_func: None,
            teardown_func: None,
        };
        
        self.register_test_suite(driver_test_suite)?;
        self.run_test_suite(driver_id, "driver_tests")
    }

    /// Get test statistics
    pub fn get_test_statistics(&self) -> TestStatistics {
        let mut total_suites = self.test_suites.len();
        let mut total_tests = 0;
        let mut critical_tests = 0;
        let mut enabled_tests = 0;
        
        for suite in self.test_suites.values() {
            total_tests += suite.tests.len();
            critical_tests += suite.tests.iter().filter(|test| test.critical).count();
            enabled_tests += suite.tests.iter().filter(|test| test.enabled).count();
        }
        
        total_tests += self.custom_tests.len();
        critical_tests += self.custom_tests.values().filter(|test| test.critical).count();
        enabled_tests += self.custom_tests.values().filter(|test| test.enabled).count();
        
        TestStatistics {
            total_suites,
            total_tests,
            critical_tests,
            enabled_tests,
            disabled_tests: total_tests - enabled_tests,
            execution_history_size: self.execution_history.len(),
            validation_capabilities: self.validation_capabilities.clone(),
            auto_test_enabled: self.auto_test_enabled,
        }
    }

    /// Enable/disable automatic testing
    pub fn set_auto_test_enabled(&mut self, enabled: bool) -> Result<(), AdvancedDriverError> {
        debug!("Setting auto-test to {}", enabled);
        self.auto_test_enabled = enabled;
        Ok(())
    }

    /// Set default test timeout
    pub fn set_default_timeout(&mut self, timeout_ms: u64) -> Result<(), AdvancedDriverError> {
        debug!("Setting default test timeout to {} ms", timeout_ms);
        self.test_timeout_default_ms = timeout_ms;
        Ok(())
    }

    /// Get execution history
    pub fn get_execution_history(&self) -> &[TestSuiteResult] {
        &self.execution_history
    }

    /// Register test callback
    pub fn register_test_callback(&mut self, callback: fn(&TestExecutionResult)) {
        self.test_callbacks.push(callback);
    }

    /// Internal: Notify test callbacks
    fn notify_test_callbacks(&self, result: &TestExecutionResult) {
        for callback in &self.test_callbacks {
            callback(result);
        }
    }

    /// Create default test suites
    pub fn create_default_test_suites(&mut self) -> Result<(), AdvancedDriverError> {
        debug!("Creating default test suites");
        
        // Basic functionality test suite
        let basic_suite = TestSuite {
            name: "basic_functionality",
            description: "Basic driver functionality tests",
            tests: vec![
                Test {
                    name: "init_test",
                    test_type: TestType::Unit,
                    category: TestCategory::Initialization,
                    timeout_ms: 1000,
                    critical: true,
                    enabled: true,
                    test_func: |context: &mut TestContext| -> TestResult {
                        TestResult::Pass
                    },
                },
            ],
            setup_func: None,
            teardown_func: None,
        };
        
        self.register_test_suite(basic_suite)?;
        
        info!("Default test suites created");
        Ok(())
    }
}

/// Test statistics
#[derive(Debug, Clone)]
pub struct TestStatistics {
    pub total_suites: usize,
    pub total_tests: usize,
    pub critical_tests: usize,
    pub enabled_tests: usize,
    pub disabled_tests: usize,
    pub execution_history_size: usize,
    pub validation_capabilities: Vec<ValidationCapability>,
    pub auto_test_enabled: bool,
}

impl Default for TestManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_test() {
        let mut manager = TestManager::new();
        let driver_id = AdvancedDriverId(1);
        
        let test = Test {
            name: "simple_test",
            test_type: TestType::Unit,
            category: TestCategory::Initialization,
            timeout_ms: 1000,
            critical: false,
            enabled: true,
            test_func: |context: &mut TestContext| -> TestResult {
                context.custom_data.insert("tested".to_string(), "true".to_string());
                TestResult::Pass
            },
        };
        
        assert!(manager.register_custom_test(test).is_ok());
        
        let result = manager.run_test(driver_id, "simple_test").unwrap();
        assert_eq!(result.result, TestResult::Pass);
        assert!(result.custom_data.contains_key("tested"));
    }

    #[test]
    fn test_test_suite() {
        let mut manager = TestManager::new();
        let driver_id = AdvancedDriverId(1);
        
        let suite = TestSuite {
            name: "test_suite",
            description: "Test suite",
            tests: vec![
                Test {
                    name: "test1",
                    test_type: TestType::Unit,
                    category: TestCategory::Initialization,
                    timeout_ms: 1000,
                    critical: false,
                    enabled: true,
                    test_func: |_| TestResult::Pass,
                },
                Test {
                    name: "test2",
                    test_type: TestType::Unit,
                    category: TestCategory::Operations,
                    timeout_ms: 1000,
                    critical: false,
                    enabled: true,
                    test_func: |_| TestResult::Pass,
                },
            ],
            setup_func: None,
            teardown_func: None,
        };
        
        assert!(manager.register_test_suite(suite).is_ok());
        
        let result = manager.run_test_suite(driver_id, "test_suite").unwrap();
        assert_eq!(result.tests_passed, 2);
        assert_eq!(result.overall_result, TestResult::Pass);
    }

    #[test]
    fn test_driver_tests() {
        let mut manager = TestManager::new();
        let driver_id = AdvancedDriverId(1);
        
        let result = manager.run_driver_tests(driver_id).unwrap();
        assert_eq!(result.overall_result, TestResult::Pass);
    }

    #[test]
    fn test_test_statistics() {
        let mut manager = TestManager::new();
        
        let stats = manager.get_test_statistics();
        assert_eq!(stats.total_suites, 0);
        assert_eq!(stats.total_tests, 0);
    }
}
