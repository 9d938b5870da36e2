//! MultiOS Automated Regression Testing System
//!
//! This crate provides comprehensive regression testing capabilities including:
//! - Performance regression detection and analysis
//! - Functional regression testing
//! - Historical trending and analytics
//! - Root cause analysis tools
//! - Automated test case generation
//! - Selective regression testing based on code changes
//! - Integration with existing benchmarking frameworks

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use uuid::Uuid;

pub mod analyzer;
pub mod database;
pub mod detectors;
pub mod generator;
pub mod integration;
pub mod reporter;
pub mod scheduler;
pub mod selector;
pub mod storage;
pub mod trending;
pub mod utils;

use analyzer::PerformanceAnalyzer;
use database::DatabaseManager;
use detectors::{FunctionalDetector, PerformanceDetector};
use generator::TestCaseGenerator;
use integration::BenchmarkIntegrator;
use reporter::ReportGenerator;
use scheduler::TestScheduler;
use selector::ChangeBasedSelector;
use storage::{BaselineStore, MeasurementStore};
use trending::TrendAnalyzer;

/// Core configuration for the regression testing system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionConfig {
    pub database_url: String,
    pub alert_rules: AlertConfig,
    pub performance_thresholds: PerformanceThresholds,
    pub scheduling_config: SchedulingConfig,
    pub integration_configs: IntegrationConfigs,
    pub testing_strategies: TestingStrategies,
}

/// Performance thresholds for regression detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceThresholds {
    pub latency_regression_pct: f64,        // Default: 10.0%
    pub throughput_regression_pct: f64,     // Default: 5.0%
    pub memory_regression_pct: f64,         // Default: 15.0%
    pub cpu_regression_pct: f64,            // Default: 8.0%
    pub confidence_threshold: f64,          // Default: 80.0%
    pub sample_size_minimum: usize,         // Default: 10
    pub outlier_detection_sigma: f64,       // Default: 2.0
}

/// Alert configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    pub email_notifications: EmailConfig,
    pub slack_webhook: Option<String>,
    pub escalation_rules: EscalationRules,
    pub quiet_hours: QuietHours,
}

/// Email notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
    pub to_addresses: Vec<String>,
}

/// Alert escalation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationRules {
    pub minor_delay_minutes: usize,
    pub major_delay_minutes: usize,
    pub critical_delay_minutes: usize,
    pub escalation_contacts: HashMap<String, Vec<String>>,
}

/// Quiet hours for alert suppression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuietHours {
    pub enabled: bool,
    pub start_hour: u8,
    pub end_hour: u8,
    pub timezone: String,
}

/// Scheduling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    pub continuous_monitoring: bool,
    pub scheduled_test_intervals: HashMap<String, String>, // test_name -> cron expression
    pub regression_check_interval: String, // cron expression
    pub trend_analysis_interval: String,   // cron expression
}

/// Integration configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationConfigs {
    pub benchmarking_system: Option<BenchmarkConfig>,
    pub ci_cd_system: Option<CICDConfig>,
    pub monitoring_system: Option<MonitoringConfig>,
}

/// Benchmarking system integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub api_url: String,
    pub api_key: String,
    pub sync_interval_minutes: usize,
}

/// CI/CD system integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CICDConfig {
    pub system_type: String, // jenkins, github_actions, gitlab_ci
    pub api_url: String,
    pub auth_token: String,
    pub auto_trigger_regression_tests: bool,
}

/// Monitoring system integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub system_type: String, // prometheus, grafana, datadog
    pub api_url: String,
    pub api_key: String,
    pub metric_collection_interval: usize,
}

/// Testing strategies configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestingStrategies {
    pub change_based_testing: ChangeBasedTestingConfig,
    pub automated_test_generation: AutomatedTestGenConfig,
    pub priority_based_testing: PriorityBasedConfig,
}

/// Change-based testing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeBasedTestingConfig {
    pub enabled: bool,
    pub impact_analysis_depth: usize,
    pub max_tests_per_change: usize,
    pub test_selection_algorithm: String, // risk_based, coverage_based, history_based
}

/// Automated test generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomatedTestGenConfig {
    pub enabled: bool,
    pub generation_methods: Vec<String>, // llm, template, mutation
    pub validation_required: bool,
    pub max_generated_tests_per_day: usize,
}

/// Priority-based testing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityBasedConfig {
    pub critical_path_weight: f64,
    pub bug_fixing_priority_weight: f64,
    pub performance_impact_weight: f64,
}

/// Core data structures for the regression testing system

/// Test execution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    pub test_name: String,
    pub component: String,
    pub test_type: TestType,
    pub status: TestStatus,
    pub execution_time_ms: u64,
    pub timestamp: DateTime<Utc>,
    pub environment: TestEnvironment,
    pub metrics: HashMap<String, f64>,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Test types supported
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TestType {
    Unit,
    Integration,
    EndToEnd,
    Performance,
    Functional,
    Security,
    Compatibility,
}

/// Test execution status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Error,
    Timeout,
}

/// Test environment information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestEnvironment {
    pub name: String,
    pub hardware_config: HashMap<String, String>,
    pub software_config: HashMap<String, String>,
    pub environment_hash: String,
}

/// Detected regression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedRegression {
    pub id: Uuid,
    pub regression_type: RegressionType,
    pub severity: RegressionSeverity,
    pub component: String,
    pub test_name: String,
    pub current_value: f64,
    pub baseline_value: f64,
    pub regression_percentage: f64,
    pub detection_algorithm: String,
    pub confidence_score: f64,
    pub test_run_id: String,
    pub timestamp: DateTime<Utc>,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Types of regressions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RegressionType {
    PerformanceLatency,
    PerformanceThroughput,
    PerformanceMemory,
    PerformanceCpu,
    Functional,
    Security,
    Compatibility,
    MemoryLeak,
    ResourceExhaustion,
}

/// Regression severity levels
#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, PartialEq)]
pub enum RegressionSeverity {
    Minor,
    Major,
    Critical,
    Blocker,
}

/// Root cause analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootCauseAnalysis {
    pub regression_id: Uuid,
    pub cause_type: CauseType,
    pub root_cause: String,
    pub contributing_factors: Vec<String>,
    pub probability_score: f64,
    pub analysis_method: String,
    pub recommendations: Vec<String>,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Root cause types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CauseType {
    CodeChange,
    DependencyUpdate,
    ConfigurationChange,
    EnvironmentDrift,
    DataRelated,
    Infrastructure,
}

/// Historical trend data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendData {
    pub metric_name: String,
    pub component: String,
    pub time_series: Vec<(DateTime<Utc>, f64)>,
    pub statistics: TrendStatistics,
    pub trend_direction: TrendDirection,
    pub predictions: Vec<TrendPrediction>,
}

/// Trend statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendStatistics {
    pub mean: f64,
    pub standard_deviation: f64,
    pub median: f64,
    pub percentile_95: f64,
    pub percentile_99: f64,
    pub min_value: f64,
    pub max_value: f64,
}

/// Trend directions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrendDirection {
    Improving,
    Degrading,
    Stable,
    Unknown,
}

/// Trend prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPrediction {
    pub timestamp: DateTime<Utc>,
    pub predicted_value: f64,
    pub confidence_interval: (f64, f64),
    pub confidence_level: f64,
}

/// Main regression testing system controller
pub struct RegressionTestingSystem {
    config: RegressionConfig,
    db: DatabaseManager,
    performance_detector: PerformanceDetector,
    functional_detector: FunctionalDetector,
    performance_analyzer: PerformanceAnalyzer,
    trend_analyzer: TrendAnalyzer,
    baseline_store: BaselineStore,
    measurement_store: MeasurementStore,
    test_generator: TestCaseGenerator,
    change_selector: ChangeBasedSelector,
    scheduler: TestScheduler,
    benchmark_integrator: BenchmarkIntegrator,
    report_generator: ReportGenerator,
}

impl RegressionTestingSystem {
    /// Create a new regression testing system instance
    pub async fn new(config_path: &Path) -> Result<Self> {
        let config = Self::load_config(config_path).await?;
        
        let db = DatabaseManager::new(&config.database_url).await
            .context("Failed to initialize database")?;
        
        Ok(Self {
            config: config.clone(),
            db,
            performance_detector: PerformanceDetector::new(config.performance_thresholds.clone()),
            functional_detector: FunctionalDetector::new(),
            performance_analyzer: PerformanceAnalyzer::new(),
            trend_analyzer: TrendAnalyzer::new(),
            baseline_store: BaselineStore::new(),
            measurement_store: MeasurementStore::new(),
            test_generator: TestCaseGenerator::new(config.testing_strategies.automated_test_generation.clone()),
            change_selector: ChangeBasedSelector::new(config.testing_strategies.change_based_testing.clone()),
            scheduler: TestScheduler::new(config.scheduling_config.clone()),
            benchmark_integrator: BenchmarkIntegrator::new(
                config.integration_configs.benchmarking_system.clone()
            ),
            report_generator: ReportGenerator::new(),
        })
    }

    /// Load configuration from file
    async fn load_config(config_path: &Path) -> Result<RegressionConfig> {
        let config_content = tokio::fs::read_to_string(config_path)
            .await
            .context("Failed to read configuration file")?;
        
        let config: RegressionConfig = toml::from_str(&config_content)
            .context("Failed to parse configuration file")?;
        
        Ok(config)
    }

    /// Initialize the regression testing system
    pub async fn initialize(&mut self) -> Result<()> {
        log::info!("Initializing MultiOS Regression Testing System");
        
        // Initialize database schema
        self.db.initialize_schema().await
            .context("Failed to initialize database schema")?;
        
        // Start background services
        self.start_background_services().await?;
        
        // Load existing baselines
        self.baseline_store.load_from_database(&self.db).await
            .context("Failed to load performance baselines")?;
        
        log::info!("Regression testing system initialized successfully");
        Ok(())
    }

    /// Start background services for continuous monitoring
    async fn start_background_services(&mut self) -> Result<()> {
        // Start the scheduler for continuous monitoring
        self.scheduler.start().await
            .context("Failed to start test scheduler")?;
        
        // Start trend analysis if configured
        if self.config.scheduling_config.continuous_monitoring {
            self.start_continuous_monitoring().await?;
        }
        
        Ok(())
    }

    /// Start continuous monitoring of system performance
    async fn start_continuous_monitoring(&mut self) -> Result<()> {
        log::info!("Starting continuous monitoring");
        
        // TODO: Implement continuous monitoring logic
        // This would involve periodic performance measurements,
        // baseline comparisons, and regression detection
        
        Ok(())
    }

    /// Run a complete regression test suite
    pub async fn run_regression_suite(&mut self, suite_config: &TestSuiteConfig) -> Result<TestSuiteResult> {
        log::info!("Running regression test suite: {}", suite_config.name);
        
        let start_time = Utc::now();
        let test_run_id = Uuid::new_v4().to_string();
        
        // Initialize test suite result
        let mut suite_result = TestSuiteResult {
            id: Uuid::new_v4(),
            suite_name: suite_config.name.clone(),
            test_run_id,
            start_time,
            end_time: start_time,
            total_tests: 0,
            passed_tests: 0,
            failed_tests: 0,
            skipped_tests: 0,
            regressions_detected: Vec::new(),
            summary: HashMap::new(),
        };
        
        // Run performance tests
        if suite_config.include_performance_tests {
            let perf_results = self.run_performance_tests(suite_config).await?;
            suite_result.merge_results(perf_results);
        }
        
        // Run functional tests
        if suite_config.include_functional_tests {
            let func_results = self.run_functional_tests(suite_config).await?;
            suite_result.merge_results(func_results);
        }
        
        // Run targeted tests based on code changes
        if suite_config.selective_testing_enabled {
            let targeted_results = self.run_targeted_tests(suite_config).await?;
            suite_result.merge_results(targeted_results);
        }
        
        suite_result.end_time = Utc::now();
        
        // Generate and store test suite report
        self.report_generator.generate_suite_report(&suite_result).await?;
        
        log::info!("Regression test suite completed: {} passed, {} failed", 
                  suite_result.passed_tests, suite_result.failed_tests);
        
        Ok(suite_result)
    }

    /// Run performance regression tests
    async fn run_performance_tests(&mut self, config: &TestSuiteConfig) -> Result<TestSuiteResult> {
        log::info!("Running performance regression tests");
        
        let mut result = TestSuiteResult::new_performance("Performance Tests");
        
        // Collect performance measurements
        let measurements = self.collect_performance_measurements(config).await?;
        
        // Store measurements in database
        for measurement in &measurements {
            self.measurement_store.store_measurement(&self.db, measurement).await?;
        }
        
        // Detect performance regressions
        let regressions = self.performance_detector.detect_regressions(
            &measurements,
            &self.baseline_store.get_baselines()
        ).await?;
        
        // Process detected regressions
        for regression in regressions {
            self.handle_detected_regression(regression).await?;
            result.regressions_detected.push(regression);
        }
        
        result.end_time = Utc::now();
        Ok(result)
    }

    /// Run functional regression tests
    async fn run_functional_tests(&mut self, config: &TestSuiteConfig) -> Result<TestSuiteResult> {
        log::info!("Running functional regression tests");
        
        let mut result = TestSuiteResult::new_functional("Functional Tests");
        
        // Execute functional tests
        let test_results = self.functional_detector.run_functional_tests(config).await?;
        
        // Analyze results for regressions
        for test_result in test_results {
            self.handle_test_result(&test_result).await?;
            
            match test_result.status {
                TestStatus::Passed => result.passed_tests += 1,
                TestStatus::Failed | TestStatus::Error => result.failed_tests += 1,
                TestStatus::Skipped => result.skipped_tests += 1,
                _ => {}
            }
        }
        
        result.end_time = Utc::now();
        Ok(result)
    }

    /// Run targeted tests based on code changes
    async fn run_targeted_tests(&mut self, config: &TestSuiteConfig) -> Result<TestSuiteResult> {
        log::info!("Running targeted tests based on code changes");
        
        let selected_tests = self.change_selector.select_tests_for_changes(
            &config.recent_code_changes
        ).await?;
        
        let mut result = TestSuiteResult::new_targeted("Targeted Tests");
        result.summary.insert("selected_tests_count".to_string(), selected_tests.len() as f64);
        
        // Execute selected tests
        for test_config in selected_tests {
            let test_result = self.functional_detector.run_single_test(&test_config).await?;
            self.handle_test_result(&test_result).await?;
            
            match test_result.status {
                TestStatus::Passed => result.passed_tests += 1,
                TestStatus::Failed | TestStatus::Error => result.failed_tests += 1,
                _ => {}
            }
        }
        
        result.end_time = Utc::now();
        Ok(result)
    }

    /// Collect performance measurements
    async fn collect_performance_measurements(&self, config: &TestSuiteConfig) -> Result<Vec<PerformanceMeasurement>> {
        // TODO: Implement performance measurement collection
        // This would integrate with the existing benchmarking framework
        Ok(Vec::new())
    }

    /// Handle detected regression
    async fn handle_detected_regression(&mut self, regression: DetectedRegression) -> Result<()> {
        log::warn!("Regression detected: {} in {} ({}% regression)", 
                  regression.regression_type, regression.component, regression.regression_percentage);
        
        // Store regression in database
        self.db.store_regression(&regression).await?;
        
        // Trigger alert if configured
        if self.should_trigger_alert(&regression) {
            self.trigger_alert(&regression).await?;
        }
        
        // Perform root cause analysis
        let root_cause = self.perform_root_cause_analysis(&regression).await?;
        if let Some(rca) = root_cause {
            self.db.store_root_cause_analysis(&rca).await?;
        }
        
        Ok(())
    }

    /// Determine if alert should be triggered for regression
    fn should_trigger_alert(&self, regression: &DetectedRegression) -> bool {
        // Check if within quiet hours
        if self.config.alert_rules.quiet_hours.enabled && self.is_quiet_hours() {
            return false;
        }
        
        // Check if regression meets severity threshold
        matches!(regression.severity, RegressionSeverity::Major | RegressionSeverity::Critical)
    }

    /// Check if current time is within quiet hours
    fn is_quiet_hours(&self) -> bool {
        let now = chrono::Local::now();
        let current_hour = now.hour() as u8;
        let start = self.config.alert_rules.quiet_hours.start_hour;
        let end = self.config.alert_rules.quiet_hours.end_hour;
        
        if start <= end {
            current_hour >= start && current_hour < end
        } else {
            // Quiet hours span midnight
            current_hour >= start || current_hour < end
        }
    }

    /// Trigger alert for regression
    async fn trigger_alert(&self, regression: &DetectedRegression) -> Result<()> {
        // TODO: Implement alert triggering
        // Email, Slack, webhook notifications
        
        log::info!("Alert triggered for regression: {} in {}", 
                  regression.component, regression.test_name);
        
        Ok(())
    }

    /// Perform root cause analysis for regression
    async fn perform_root_cause_analysis(&self, regression: &DetectedRegression) -> Result<Option<RootCauseAnalysis>> {
        // TODO: Implement root cause analysis logic
        // This would analyze code changes, dependencies, configuration, etc.
        
        Ok(None)
    }

    /// Handle test result
    async fn handle_test_result(&mut self, test_result: &TestResult) -> Result<()> {
        // Store test result in database
        self.db.store_test_result(test_result).await?;
        
        // Check for functional regressions
        if test_result.status == TestStatus::Failed {
            let regression = DetectedRegression {
                id: Uuid::new_v4(),
                regression_type: RegressionType::Functional,
                severity: RegressionSeverity::Major,
                component: test_result.component.clone(),
                test_name: test_result.test_name.clone(),
                current_value: 0.0,
                baseline_value: 1.0,
                regression_percentage: 100.0,
                detection_algorithm: "functional_test_failure".to_string(),
                confidence_score: 100.0,
                test_run_id: test_result.id.to_string(),
                timestamp: test_result.timestamp,
                metadata: HashMap::new(),
            };
            
            self.handle_detected_regression(regression).await?;
        }
        
        Ok(())
    }

    /// Generate comprehensive regression report
    pub async fn generate_comprehensive_report(&self, time_range: (DateTime<Utc>, DateTime<Utc>)) -> Result<String> {
        self.report_generator.generate_comprehensive_report(&self.db, time_range).await
    }

    /// Analyze trends in regression data
    pub async fn analyze_regression_trends(&self, component: &str, time_range_days: u32) -> Result<TrendAnalysisResult> {
        let end_time = Utc::now();
        let start_time = end_time - chrono::Duration::days(time_range_days as i64);
        
        self.trend_analyzer.analyze_component_trends(&self.db, component, start_time, end_time).await
    }
}

/// Test suite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuiteConfig {
    pub name: String,
    pub include_performance_tests: bool,
    pub include_functional_tests: bool,
    pub selective_testing_enabled: bool,
    pub recent_code_changes: Vec<CodeChange>,
    pub performance_benchmarks: Vec<String>,
    pub functional_test_suites: Vec<String>,
}

/// Test suite execution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuiteResult {
    pub id: Uuid,
    pub suite_name: String,
    pub test_run_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,
    pub regressions_detected: Vec<DetectedRegression>,
    pub summary: HashMap<String, f64>,
}

impl TestSuiteResult {
    pub fn new_performance(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            suite_name: name.to_string(),
            test_run_id: Uuid::new_v4().to_string(),
            start_time: Utc::now(),
            end_time: Utc::now(),
            total_tests: 0,
            passed_tests: 0,
            failed_tests: 0,
            skipped_tests: 0,
            regressions_detected: Vec::new(),
            summary: HashMap::new(),
        }
    }

    pub fn new_functional(name: &str) -> Self {
        Self::new_performance(name)
    }

    pub fn new_targeted(name: &str) -> Self {
        Self::new_performance(name)
    }

    pub fn merge_results(&mut self, other: TestSuiteResult) {
        self.total_tests += other.total_tests;
        self.passed_tests += other.passed_tests;
        self.failed_tests += other.failed_tests;
        self.skipped_tests += other.skipped_tests;
        self.regressions_detected.extend(other.regressions_detected);
        
        for (key, value) in other.summary {
            self.summary.insert(key, value);
        }
    }
}

/// Code change information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeChange {
    pub commit_hash: String,
    pub commit_message: String,
    pub author: String,
    pub files_changed: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub change_type: String,
}

/// Performance measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMeasurement {
    pub id: Uuid,
    pub test_name: String,
    pub component: String,
    pub metric_type: String,
    pub value: f64,
    pub unit: String,
    pub test_run_id: String,
    pub timestamp: DateTime<Utc>,
    pub environment: TestEnvironment,
}

/// Trend analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysisResult {
    pub component: String,
    pub analysis_period: (DateTime<Utc>, DateTime<Utc>),
    pub trend_data: HashMap<String, TrendData>,
    pub summary: TrendSummary,
    pub recommendations: Vec<String>,
}

/// Trend analysis summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    pub total_regressions: usize,
    pub improving_trends: usize,
    pub degrading_trends: usize,
    pub stable_trends: usize,
    pub avg_regression_severity: f64,
    pub most_affected_components: Vec<String>,
}