//! MultiOS Comprehensive Testing Suite
//!
//! A unified testing framework that orchestrates all MultiOS testing capabilities
//! including unit tests, integration tests, stress tests, performance benchmarks,
//! and cross-platform testing for x86_64, ARM64, and RISC-V architectures.

use anyhow::{Result, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Core test result type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TestResult {
    Passed {
        duration_ms: u64,
        architecture: Option<String>,
        test_category: TestCategory,
    },
    Failed {
        duration_ms: u64,
        architecture: Option<String>,
        test_category: TestCategory,
        error: String,
        failure_type: FailureType,
    },
    Skipped {
        reason: String,
        architecture: Option<String>,
        test_category: TestCategory,
    },
    Timeout {
        timeout_ms: u64,
        architecture: Option<String>,
        test_category: TestCategory,
    },
}

/// Test categories supported by the comprehensive testing suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TestCategory {
    Unit,
    Integration,
    System,
    Stress,
    Performance,
    Security,
    Compatibility,
    Regression,
    CrossPlatform,
    EndToEnd,
}

/// Types of test failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FailureType {
    Assertion,
    Timeout,
    ResourceExhaustion,
    Crash,
    DependencyFailure,
    Environment,
    CodeError,
    Configuration,
}

/// Architecture targets for cross-platform testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Architecture {
    X86_64,
    ARM64,
    RISC_V,
}

/// Test configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    pub test_categories: Vec<TestCategory>,
    pub architectures: Vec<Architecture>,
    pub parallel_execution: bool,
    pub max_concurrent_tests: usize,
    pub timeout_ms: u64,
    pub coverage_threshold: f64,
    pub performance_benchmarks: bool,
    pub stress_test_duration: u64,
    pub enable_coverage: bool,
    pub output_directory: PathBuf,
    pub log_level: String,
}

/// Test execution statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestStats {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,
    pub timeout_tests: usize,
    pub total_duration_ms: u64,
    pub average_duration_ms: f64,
    pub architecture_results: HashMap<String, ArchitectureStats>,
    pub category_results: HashMap<TestCategory, CategoryStats>,
    pub performance_metrics: HashMap<String, PerformanceMetric>,
}

/// Performance metric captured during testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub metric_name: String,
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
    pub architecture: Option<String>,
}

/// Architecture-specific test results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureStats {
    pub architecture: String,
    pub tests_run: usize,
    pub tests_passed: usize,
    pub tests_failed: usize,
    pub average_duration_ms: f64,
    pub performance_score: f64,
}

/// Test category results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: TestCategory,
    pub tests_run: usize,
    pub tests_passed: usize,
    pub tests_failed: usize,
    pub coverage_percentage: f64,
}

/// Test execution context
pub struct TestContext {
    pub test_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub config: TestConfig,
    pub output_directory: PathBuf,
}

/// Comprehensive testing suite orchestrator
#[derive(Clone)]
pub struct ComprehensiveTestingSuite {
    config: TestConfig,
    context: Arc<RwLock<TestContext>>,
    test_runners: HashMap<TestCategory, Box<dyn TestRunner + Send + Sync>>,
    performance_monitor: Arc<RwLock<PerformanceMonitor>>,
}

/// Trait for different test runners
pub trait TestRunner {
    async fn run_tests(&self, context: &TestContext) -> Result<Vec<TestResult>>;
    fn get_supported_architectures(&self) -> Vec<Architecture>;
    fn get_test_category(&self) -> TestCategory;
    fn get_description(&self) -> String;
}

/// Performance monitoring service
pub struct PerformanceMonitor {
    metrics: HashMap<String, PerformanceMetric>,
    start_time: DateTime<Utc>,
}

impl ComprehensiveTestingSuite {
    /// Create a new comprehensive testing suite instance
    pub fn new(config: TestConfig) -> Result<Self> {
        let context = TestContext {
            test_id: Uuid::new_v4(),
            start_time: Utc::now(),
            config: config.clone(),
            output_directory: config.output_directory.clone(),
        };

        let performance_monitor = Arc::new(RwLock::new(PerformanceMonitor::new()));
        
        let mut test_runners: HashMap<TestCategory, Box<dyn TestRunner + Send + Sync>> = HashMap::new();
        
        // Initialize test runners for each category
        test_runners.insert(TestCategory::Unit, Box::new(UnitTestRunner::new()));
        test_runners.insert(TestCategory::Integration, Box::new(IntegrationTestRunner::new()));
        test_runners.insert(TestCategory::System, Box::new(SystemTestRunner::new()));
        test_runners.insert(TestCategory::Stress, Box::new(StressTestRunner::new()));
        test_runners.insert(TestCategory::Performance, Box::new(PerformanceTestRunner::new()));
        test_runners.insert(TestCategory::Security, Box::new(SecurityTestRunner::new()));
        test_runners.insert(TestCategory::Compatibility, Box::new(CompatibilityTestRunner::new()));
        test_runners.insert(TestCategory::Regression, Box::new(RegressionTestRunner::new()));
        test_runners.insert(TestCategory::CrossPlatform, Box::new(CrossPlatformTestRunner::new()));
        test_runners.insert(TestCategory::EndToEnd, Box::new(EndToEndTestRunner::new()));

        Ok(Self {
            config,
            context: Arc::new(RwLock::new(context)),
            test_runners,
            performance_monitor,
        })
    }

    /// Run all configured test categories
    pub async fn run_all_tests(&self) -> Result<TestStats> {
        log::info!("Starting comprehensive test suite execution");
        
        let categories = &self.config.test_categories;
        let mut all_results = Vec::new();

        for category in categories {
            if let Some(runner) = self.test_runners.get(category) {
                log::info!("Running {} tests", category);
                let results = self.run_category_tests(category, runner).await?;
                all_results.extend(results);
            }
        }

        let stats = self.generate_statistics(&all_results).await?;
        log::info!("Test suite completed with {} total tests", stats.total_tests);
        
        Ok(stats)
    }

    /// Run tests for a specific category
    async fn run_category_tests(&self, category: &TestCategory, runner: &Box<dyn TestRunner + Send + Sync>) -> Result<Vec<TestResult>> {
        let context = self.context.read().await;
        let architectures = if category == &TestCategory::CrossPlatform {
            self.config.architectures.clone()
        } else {
            vec![Architecture::X86_64] // Default architecture for non-cross-platform tests
        };

        let mut results = Vec::new();

        for arch in architectures {
            log::debug!("Running {} tests on {:?}", category, arch);
            let arch_results = self.run_architecture_tests(category, runner, &arch, &context).await?;
            results.extend(arch_results);
        }

        Ok(results)
    }

    /// Run tests for a specific architecture
    async fn run_architecture_tests(&self, category: &TestCategory, runner: &Box<dyn TestRunner + Send + Sync>, architecture: &Architecture, context: &TestContext) -> Result<Vec<TestResult>> {
        // Set up architecture-specific environment
        self.setup_test_environment(architecture).await?;
        
        // Execute the tests
        let results = runner.run_tests(context).await.with_context(|| {
            format!("Failed to run {} tests on {:?}", category, architecture)
        })?;

        // Clean up architecture-specific resources
        self.cleanup_test_environment(architecture).await?;

        Ok(results)
    }

    /// Set up test environment for specific architecture
    async fn setup_test_environment(&self, _architecture: &Architecture) -> Result<()> {
        // Create output directories
        let output_dir = &self.config.output_directory;
        std::fs::create_dir_all(output_dir).context("Failed to create output directory")?;
        
        Ok(())
    }

    /// Clean up test environment for specific architecture
    async fn cleanup_test_environment(&self, _architecture: &Architecture) -> Result<()> {
        // Perform architecture-specific cleanup
        Ok(())
    }

    /// Generate comprehensive test statistics
    async fn generate_statistics(&self, results: &[TestResult]) -> Result<TestStats> {
        let mut total_tests = results.len();
        let mut passed_tests = 0;
        let mut failed_tests = 0;
        let mut skipped_tests = 0;
        let mut timeout_tests = 0;
        let mut total_duration_ms = 0u64;

        let mut architecture_results: HashMap<String, ArchitectureStats> = HashMap::new();
        let mut category_results: HashMap<TestCategory, CategoryStats> = HashMap::new();

        for result in results {
            match result {
                TestResult::Passed { duration_ms, architecture, test_category } => {
                    passed_tests += 1;
                    total_duration_ms += duration_ms;
                    
                    if let Some(arch) = architecture {
                        let stats = architecture_results.entry(arch.clone()).or_insert_with(|| ArchitectureStats {
                            architecture: arch.clone(),
                            tests_run: 0,
                            tests_passed: 0,
                            tests_failed: 0,
                            average_duration_ms: 0.0,
                            performance_score: 100.0,
                        });
                        stats.tests_run += 1;
                        stats.tests_passed += 1;
                    }
                    
                    let cat_stats = category_results.entry(test_category.clone()).or_insert_with(|| CategoryStats {
                        category: test_category.clone(),
                        tests_run: 0,
                        tests_passed: 0,
                        tests_failed: 0,
                        coverage_percentage: 0.0,
                    });
                    cat_stats.tests_run += 1;
                    cat_stats.tests_passed += 1;
                }
                TestResult::Failed { duration_ms, architecture, test_category, .. } => {
                    failed_tests += 1;
                    total_duration_ms += duration_ms;
                    
                    if let Some(arch) = architecture {
                        let stats = architecture_results.entry(arch.clone()).or_insert_with(|| ArchitectureStats {
                            architecture: arch.clone(),
                            tests_run: 0,
                            tests_passed: 0,
                            tests_failed: 0,
                            average_duration_ms: 0.0,
                            performance_score: 0.0,
                        });
                        stats.tests_run += 1;
                        stats.tests_failed += 1;
                    }
                    
                    let cat_stats = category_results.entry(test_category.clone()).or_insert_with(|| CategoryStats {
                        category: test_category.clone(),
                        tests_run: 0,
                        tests_passed: 0,
                        tests_failed: 0,
                        coverage_percentage: 0.0,
                    });
                    cat_stats.tests_run += 1;
                    cat_stats.tests_failed += 1;
                }
                TestResult::Skipped { test_category, .. } => {
                    skipped_tests += 1;
                    let cat_stats = category_results.entry(test_category.clone()).or_insert_with(|| CategoryStats {
                        category: test_category.clone(),
                        tests_run: 0,
                        tests_passed: 0,
                        tests_failed: 0,
                        coverage_percentage: 0.0,
                    });
                    cat_stats.tests_run += 1;
                }
                TestResult::Timeout { duration_ms, architecture, test_category } => {
                    timeout_tests += 1;
                    total_duration_ms += duration_ms;
                    
                    if let Some(arch) = architecture {
                        let stats = architecture_results.entry(arch.clone()).or_insert_with(|| ArchitectureStats {
                            architecture: arch.clone(),
                            tests_run: 0,
                            tests_passed: 0,
                            tests_failed: 0,
                            average_duration_ms: 0.0,
                            performance_score: 0.0,
                        });
                        stats.tests_run += 1;
                        stats.tests_failed += 1;
                    }
                    
                    let cat_stats = category_results.entry(test_category.clone()).or_insert_with(|| CategoryStats {
                        category: test_category.clone(),
                        tests_run: 0,
                        tests_passed: 0,
                        tests_failed: 0,
                        coverage_percentage: 0.0,
                    });
                    cat_stats.tests_run += 1;
                    cat_stats.tests_failed += 1;
                }
            }
        }

        // Calculate averages
        for stats in architecture_results.values_mut() {
            if stats.tests_run > 0 {
                stats.average_duration_ms = total_duration_ms as f64 / stats.tests_run as f64;
                stats.performance_score = (stats.tests_passed as f64 / stats.tests_run as f64) * 100.0;
            }
        }

        for cat_stats in category_results.values_mut() {
            if cat_stats.tests_run > 0 {
                cat_stats.coverage_percentage = (cat_stats.tests_passed as f64 / cat_stats.tests_run as f64) * 100.0;
            }
        }

        let performance_metrics = self.get_performance_metrics().await;

        Ok(TestStats {
            total_tests,
            passed_tests,
            failed_tests,
            skipped_tests,
            timeout_tests,
            total_duration_ms,
            average_duration_ms: if total_tests > 0 { total_duration_ms as f64 / total_tests as f64 } else { 0.0 },
            architecture_results,
            category_results,
            performance_metrics,
        })
    }

    /// Get performance metrics collected during testing
    async fn get_performance_metrics(&self) -> HashMap<String, PerformanceMetric> {
        self.performance_monitor.read().await.metrics.clone()
    }
}

// Performance monitor implementation
impl PerformanceMonitor {
    pub fn new() -> Self {
        Self {
            metrics: HashMap::new(),
            start_time: Utc::now(),
        }
    }

    pub fn add_metric(&mut self, metric: PerformanceMetric) {
        self.metrics.insert(metric.metric_name.clone(), metric);
    }
}

// Individual test runner implementations (simplified stubs for compilation)
pub struct UnitTestRunner;
pub struct IntegrationTestRunner;
pub struct SystemTestRunner;
pub struct StressTestRunner;
pub struct PerformanceTestRunner;
pub struct SecurityTestRunner;
pub struct CompatibilityTestRunner;
pub struct RegressionTestRunner;
pub struct CrossPlatformTestRunner;
pub struct EndToEndTestRunner;

impl UnitTestRunner {
    pub fn new() -> Self { Self }
}

impl IntegrationTestRunner {
    pub fn new() -> Self { Self }
}

impl SystemTestRunner {
    pub fn new() -> Self { Self }
}

impl StressTestRunner {
    pub fn new() -> Self { Self }
}

impl PerformanceTestRunner {
    pub fn new() -> Self { Self }
}

impl SecurityTestRunner {
    pub fn new() -> Self { Self }
}

impl CompatibilityTestRunner {
    pub fn new() -> Self { Self }
}

impl RegressionTestRunner {
    pub fn new() -> Self { Self }
}

impl CrossPlatformTestRunner {
    pub fn new() -> Self { Self }
}

impl EndToEndTestRunner {
    pub fn new() -> Self { Self }
}

macro_rules! impl_test_runner {
    ($($name:ident),*) => {
        $(
            impl TestRunner for $name {
                async fn run_tests(&self, _context: &TestContext) -> Result<Vec<TestResult>> {
                    // TODO: Implement specific test runner logic
                    Ok(vec![TestResult::Passed {
                        duration_ms: 1000,
                        architecture: None,
                        test_category: TestCategory::Unit,
                    }])
                }

                fn get_supported_architectures(&self) -> Vec<Architecture> {
                    vec![Architecture::X86_64, Architecture::ARM64, Architecture::RISC_V]
                }

                fn get_test_category(&self) -> TestCategory {
                    TestCategory::Unit
                }

                fn get_description(&self) -> String {
                    format!("{} test runner", stringify!($name))
                }
            }
        )*
    };
}

impl_test_runner!(
    UnitTestRunner, IntegrationTestRunner, SystemTestRunner, StressTestRunner,
    PerformanceTestRunner, SecurityTestRunner, CompatibilityTestRunner,
    RegressionTestRunner, CrossPlatformTestRunner, EndToEndTestRunner
);

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_comprehensive_testing_suite_creation() {
        let temp_dir = TempDir::new().unwrap();
        let config = TestConfig {
            test_categories: vec![TestCategory::Unit],
            architectures: vec![Architecture::X86_64],
            parallel_execution: false,
            max_concurrent_tests: 4,
            timeout_ms: 30000,
            coverage_threshold: 80.0,
            performance_benchmarks: false,
            stress_test_duration: 60000,
            enable_coverage: true,
            output_directory: temp_dir.path().to_path_buf(),
            log_level: "info".to_string(),
        };

        let suite = ComprehensiveTestingSuite::new(config).unwrap();
        assert!(suite.test_runners.contains_key(&TestCategory::Unit));
    }
}
