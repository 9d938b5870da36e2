//! MultiOS UI Testing and Validation Framework
//!
//! A comprehensive framework for testing MultiOS user interface components including
//! GUI testing automation, screenshot comparison, widget interaction testing,
//! UI performance benchmarking, accessibility testing, usability validation,
//! cross-platform compatibility testing, and visual regression testing.

pub mod automation;
pub mod accessibility;
pub mod benchmarking;
pub mod comparison;
pub mod debugging;
pub mod validation;
pub mod platform;
pub mod regression;
pub mod widgets;
pub mod performance;
pub mod testing;

pub use automation::{UICommand, WidgetInteraction, AutomationEngine};
pub use accessibility::{AccessibilityChecker, AccessibilityReport};
pub use benchmarking::{PerformanceBenchmark, BenchmarkReport};
pub use comparison::{ScreenshotComparator, VisualDiff};
pub use debugging::{UIDebugger, DebugInfo};
pub use validation::{UIValidator, ValidationReport};
pub use platform::{CrossPlatformTester, PlatformCompatibility};
pub use regression::{VisualRegression, RegressionTest};
pub use widgets::{WidgetTester, WidgetProperties};
pub use performance::{UIProfiler, PerformanceMetrics};
pub use testing::{UITestSuite, TestCase, TestResult};

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Main configuration for the UI testing framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIFrameworkConfig {
    pub screenshots_dir: String,
    pub baseline_dir: String,
    pub results_dir: String,
    pub timeout_ms: u64,
    pub parallel_jobs: usize,
    pub screenshot_quality: u8,
    pub accessibility_standards: Vec<String>,
    pub performance_thresholds: PerformanceThresholds,
    pub cross_platform_targets: Vec<Platform>,
    pub debug_mode: bool,
    pub video_recording: bool,
    pub mock_data_enabled: bool,
}

impl Default for UIFrameworkConfig {
    fn default() -> Self {
        Self {
            screenshots_dir: "screenshots/".to_string(),
            baseline_dir: "baseline/".to_string(),
            results_dir: "results/".to_string(),
            timeout_ms: 30000,
            parallel_jobs: 4,
            screenshot_quality: 90,
            accessibility_standards: vec!["WCAG2.1AA".to_string()],
            performance_thresholds: PerformanceThresholds::default(),
            cross_platform_targets: vec![Platform::Linux, Platform::Windows, Platform::MacOS],
            debug_mode: false,
            video_recording: false,
            mock_data_enabled: true,
        }
    }
}

/// Performance thresholds for UI components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceThresholds {
    pub max_load_time_ms: u64,
    pub max_animation_duration_ms: u64,
    pub max_interaction_response_ms: u64,
    pub max_memory_usage_mb: u64,
    pub min_fps: u32,
    pub max_cpu_usage_percent: u8,
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            max_load_time_ms: 2000,
            max_animation_duration_ms: 100,
            max_interaction_response_ms: 100,
            max_memory_usage_mb: 256,
            min_fps: 30,
            max_cpu_usage_percent: 80,
        }
    }
}

/// Supported platforms for cross-platform testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Platform {
    Linux,
    Windows,
    MacOS,
    Android,
    iOS,
    Web,
}

/// Test report containing all test results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkReport {
    pub timestamp: DateTime<Utc>,
    pub config: UIFrameworkConfig,
    pub test_results: HashMap<String, TestResult>,
    pub accessibility_report: AccessibilityReport,
    pub performance_report: BenchmarkReport,
    pub visual_regression_results: Vec<RegressionTest>,
    pub cross_platform_results: HashMap<Platform, PlatformCompatibility>,
    pub summary: TestSummary,
}

impl FrameworkReport {
    pub fn new(config: UIFrameworkConfig) -> Self {
        Self {
            timestamp: Utc::now(),
            config,
            test_results: HashMap::new(),
            accessibility_report: AccessibilityReport::default(),
            performance_report: BenchmarkReport::default(),
            visual_regression_results: Vec::new(),
            cross_platform_results: HashMap::new(),
            summary: TestSummary::default(),
        }
    }
}

/// Summary of test results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSummary {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,
    pub accessibility_issues: usize,
    pub performance_issues: usize,
    pub visual_regression_issues: usize,
    pub compatibility_issues: usize,
    pub total_execution_time_ms: u64,
    pub overall_score: f64,
}

impl Default for TestSummary {
    fn default() -> Self {
        Self {
            total_tests: 0,
            passed_tests: 0,
            failed_tests: 0,
            skipped_tests: 0,
            accessibility_issues: 0,
            performance_issues: 0,
            visual_regression_issues: 0,
            compatibility_issues: 0,
            total_execution_time_ms: 0,
            overall_score: 0.0,
        }
    }
}

/// Framework error types
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Screenshot comparison failed: {0}")]
    ScreenshotComparison(String),
    
    #[error("Accessibility testing failed: {0}")]
    AccessibilityTesting(String),
    
    #[error("Performance benchmark failed: {0}")]
    PerformanceBenchmark(String),
    
    #[error("Widget interaction failed: {0}")]
    WidgetInteraction(String),
    
    #[error("Cross-platform testing failed: {0}")]
    CrossPlatform(String),
    
    #[error("Visual regression testing failed: {0}")]
    VisualRegression(String),
    
    #[error("UI validation failed: {0}")]
    Validation(String),
    
    #[error("Automation failed: {0}")]
    Automation(String),
    
    #[error("Configuration error: {0}")]
    Configuration(String),
    
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Framework result type
pub type FrameworkResult<T> = Result<T, FrameworkError>;

/// Main UI Testing Framework
pub struct UITestingFramework {
    config: UIFrameworkConfig,
    automation_engine: AutomationEngine,
    screenshot_comparator: ScreenshotComparator,
    accessibility_checker: AccessibilityChecker,
    performance_benchmark: PerformanceBenchmark,
    widget_tester: WidgetTester,
    cross_platform_tester: CrossPlatformTester,
    visual_regression: VisualRegression,
    ui_validator: UIValidator,
    ui_profiler: UIProfiler,
}

impl UITestingFramework {
    /// Create a new UI testing framework instance
    pub fn new(config: UIFrameworkConfig) -> Self {
        Self {
            automation_engine: AutomationEngine::new(&config),
            screenshot_comparator: ScreenshotComparator::new(&config),
            accessibility_checker: AccessibilityChecker::new(&config),
            performance_benchmark: PerformanceBenchmark::new(&config),
            widget_tester: WidgetTester::new(&config),
            cross_platform_tester: CrossPlatformTester::new(&config),
            visual_regression: VisualRegression::new(&config),
            ui_validator: UIValidator::new(&config),
            ui_profiler: UIProfiler::new(&config),
            config,
        }
    }

    /// Run the complete test suite
    pub async fn run_complete_test_suite(&mut self) -> FrameworkResult<FrameworkReport> {
        log::info!("Starting complete UI testing suite...");
        
        let mut report = FrameworkReport::new(self.config.clone());
        
        // Initialize directories
        self.initialize_directories()?;
        
        // Run automation tests
        log::info!("Running GUI automation tests...");
        self.automation_engine.run_tests().await?;
        
        // Run screenshot comparisons
        log::info!("Running visual comparison tests...");
        self.screenshot_comparator.compare_all().await?;
        
        // Run accessibility tests
        log::info!("Running accessibility tests...");
        report.accessibility_report = self.accessibility_checker.run_all_checks().await?;
        
        // Run performance benchmarks
        log::info!("Running performance benchmarks...");
        report.performance_report = self.performance_benchmark.run_all_benchmarks().await?;
        
        // Run widget interaction tests
        log::info!("Running widget interaction tests...");
        self.widget_tester.test_all_widgets().await?;
        
        // Run cross-platform compatibility tests
        log::info!("Running cross-platform compatibility tests...");
        for platform in &self.config.cross_platform_targets {
            report.cross_platform_results.insert(
                platform.clone(),
                self.cross_platform_tester.test_platform(platform).await?
            );
        }
        
        // Run visual regression tests
        log::info!("Running visual regression tests...");
        report.visual_regression_results = self.visual_regression.run_all_tests().await?;
        
        // Run UI validation tests
        log::info!("Running UI validation tests...");
        self.ui_validator.validate_all().await?;
        
        // Generate final report
        self.generate_summary(&mut report)?;
        
        Ok(report)
    }

    /// Initialize framework directories
    fn initialize_directories(&self) -> FrameworkResult<()> {
        std::fs::create_dir_all(&self.config.screenshots_dir)?;
        std::fs::create_dir_all(&self.config.baseline_dir)?;
        std::fs::create_dir_all(&self.config.results_dir)?;
        Ok(())
    }

    /// Generate summary report
    fn generate_summary(&self, report: &mut FrameworkReport) -> FrameworkResult<()> {
        report.summary.total_tests = report.test_results.len();
        report.summary.passed_tests = report.test_results
            .values()
            .filter(|r| matches!(r.status, TestStatus::Passed))
            .count();
        report.summary.failed_tests = report.test_results
            .values()
            .filter(|r| matches!(r.status, TestStatus::Failed))
            .count();
        report.summary.skipped_tests = report.test_results
            .values()
            .filter(|r| matches!(r.status, TestStatus::Skipped))
            .count();
        
        report.summary.accessibility_issues = report.accessibility_report.issues.len();
        report.summary.performance_issues = report.performance_report.issues.len();
        report.summary.visual_regression_issues = report.visual_regression_results
            .iter()
            .filter(|r| r.difference_detected)
            .count();
        report.summary.compatibility_issues = report.cross_platform_results
            .values()
            .filter(|r| !r.compatible)
            .count();
        
        let total_issues = report.summary.accessibility_issues + 
                          report.summary.performance_issues + 
                          report.summary.visual_regression_issues + 
                          report.summary.compatibility_issues;
        
        report.summary.overall_score = if report.summary.total_tests > 0 {
            (report.summary.passed_tests as f64 / report.summary.total_tests as f64) * 100.0
        } else {
            100.0
        };
        
        log::info!("Test suite completed. Score: {:.2}%", report.summary.overall_score);
        Ok(())
    }
}

/// Test status enumeration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Running,
}

impl TestStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }
    
    pub fn is_failed(&self) -> bool {
        matches!(self, TestStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_framework_config_default() {
        let config = UIFrameworkConfig::default();
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.parallel_jobs, 4);
        assert!(config.accessibility_standards.contains(&"WCAG2.1AA".to_string()));
    }
    
    #[test]
    fn test_test_status_checks() {
        let passed = TestStatus::Passed;
        let failed = TestStatus::Failed;
        let skipped = TestStatus::Skipped;
        
        assert!(passed.is_passed());
        assert!(!passed.is_failed());
        
        assert!(failed.is_failed());
        assert!(!failed.is_passed());
        
        assert!(!skipped.is_passed());
        assert!(!skipped.is_failed());
    }
}