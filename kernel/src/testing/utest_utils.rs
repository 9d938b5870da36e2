//! MultiOS Testing Utilities and Helpers
//! 
//! This module provides utility functions and helpers for the testing framework,
//! including timing utilities, test data generators, and validation helpers.

use crate::testing::uat_tests::*;
use alloc::vec::Vec;
use alloc::string::{String, ToString};

/// Test execution timer for measuring test performance
#[derive(Debug)]
pub struct TestTimer {
    start_time: u64,
    end_time: u64,
}

impl TestTimer {
    /// Create a new test timer and start it
    pub fn new() -> Self {
        Self {
            start_time: get_current_time_ms(),
            end_time: 0,
        }
    }

    /// Stop the timer and return elapsed time in milliseconds
    pub fn stop(&mut self) -> u64 {
        self.end_time = get_current_time_ms();
        self.end_time - self.start_time
    }

    /// Get elapsed time without stopping
    pub fn elapsed(&self) -> u64 {
        get_current_time_ms() - self.start_time
    }
}

/// Test data generator for creating realistic test scenarios
#[derive(Debug)]
pub struct TestDataGenerator {
    seed: u64,
}

impl TestDataGenerator {
    /// Create a new test data generator with optional seed
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed: seed.unwrap_or(42),
        }
    }

    /// Generate random test user data
    pub fn generate_test_user(&mut self) -> String {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let user_num = (self.seed % 1000) as u32;
        format!("testuser_{:03}", user_num)
    }

    /// Generate random test configuration data
    pub fn generate_test_config(&mut self) -> (String, String) {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let config_num = (self.seed % 10) as u32;
        
        match config_num {
            0 => ("network.enabled".to_string(), "true".to_string()),
            1 => ("logging.level".to_string(), "INFO".to_string()),
            2 => ("security.policy_level".to_string(), "medium".to_string()),
            3 => ("performance.memory_limit".to_string(), "4096".to_string()),
            4 => ("update.auto_check".to_string(), "false".to_string()),
            5 => ("system.timezone".to_string(), "UTC".to_string()),
            6 => ("network.port".to_string(), "8080".to_string()),
            7 => ("security.session_timeout".to_string(), "30".to_string()),
            8 => ("system.backup.interval".to_string(), "24".to_string()),
            _ => ("test.config.value".to_string(), "test_value".to_string()),
        }
    }

    /// Generate random test process names
    pub fn generate_test_process(&mut self) -> String {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let process_num = (self.seed % 5) as u32;
        
        match process_num {
            0 => "apache2".to_string(),
            1 => "mysql".to_string(),
            2 => "nginx".to_string(),
            3 => "sshd".to_string(),
            _ => "custom_service".to_string(),
        }
    }

    /// Generate random test API endpoints
    pub fn generate_test_endpoint(&mut self) -> String {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let endpoint_num = (self.seed % 8) as u32;
        
        match endpoint_num {
            0 => "/api/v1/system/info".to_string(),
            1 => "/api/v1/system/status".to_string(),
            2 => "/api/v1/users".to_string(),
            3 => "/api/v1/config".to_string(),
            4 => "/api/v1/processes".to_string(),
            5 => "/api/v1/services".to_string(),
            6 => "/api/v1/security/policies".to_string(),
            7 => "/api/v1/logs".to_string(),
            _ => "/api/v1/test".to_string(),
        }
    }

    /// Generate random test queries for documentation search
    pub fn generate_test_query(&mut self) -> String {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let query_num = (self.seed % 6) as u32;
        
        match query_num {
            0 => "how to create user".to_string(),
            1 => "configure network".to_string(),
            2 => "security policies".to_string(),
            3 => "backup procedures".to_string(),
            4 => "troubleshoot login".to_string(),
            _ => "system monitoring".to_string(),
        }
    }
}

/// Validation helpers for test assertions
#[derive(Debug)]
pub struct TestValidator;

impl TestValidator {
    /// Assert that a value is within an acceptable range
    pub fn assert_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
        value >= min && value <= max
    }

    /// Assert that a response time is acceptable
    pub fn assert_acceptable_response_time(response_time_ms: u64, max_acceptable_ms: u64) -> bool {
        response_time_ms <= max_acceptable_ms
    }

    /// Assert that a success rate meets minimum threshold
    pub fn assert_minimum_success_rate(success_rate: f64, minimum: f64) -> bool {
        success_rate >= minimum
    }

    /// Assert that user satisfaction score meets minimum
    pub fn assert_user_satisfaction(satisfaction: f64, minimum: f64) -> bool {
        satisfaction >= minimum
    }

    /// Validate user interface accessibility score
    pub fn validate_accessibility_score(score: f64, minimum: f64) -> bool {
        score >= minimum
    }

    /// Validate documentation completeness
    pub fn validate_documentation_completeness(completeness: f64, minimum: f64) -> bool {
        completeness >= minimum
    }

    /// Validate API response format
    pub fn validate_api_response(response: &str, expected_fields: &[&str]) -> bool {
        for field in expected_fields {
            if !response.contains(field) {
                return false;
            }
        }
        true
    }

    /// Validate workflow step completion
    pub fn validate_workflow_steps(steps_completed: usize, steps_total: usize) -> bool {
        steps_completed == steps_total
    }
}

/// Test scenario builder for creating complex test scenarios
#[derive(Debug)]
pub struct TestScenarioBuilder {
    scenario_name: String,
    steps: Vec<String>,
    expected_duration_ms: u64,
    user_interaction_required: bool,
}

impl TestScenarioBuilder {
    /// Create a new test scenario builder
    pub fn new(scenario_name: &str) -> Self {
        Self {
            scenario_name: scenario_name.to_string(),
            steps: Vec::new(),
            expected_duration_ms: 0,
            user_interaction_required: false,
        }
    }

    /// Add a step to the scenario
    pub fn add_step(&mut self, step: &str) -> &mut Self {
        self.steps.push(step.to_string());
        self
    }

    /// Set expected duration
    pub fn set_expected_duration(&mut self, duration_ms: u64) -> &mut Self {
        self.expected_duration_ms = duration_ms;
        self
    }

    /// Set whether user interaction is required
    pub fn set_user_interaction(&mut self, required: bool) -> &mut Self {
        self.user_interaction_required = required;
        self
    }

    /// Build the scenario
    pub fn build(&self) -> TestScenario {
        TestScenario {
            name: self.scenario_name.clone(),
            steps: self.steps.clone(),
            expected_duration_ms: self.expected_duration_ms,
            user_interaction_required: self.user_interaction_required,
        }
    }
}

/// Test scenario structure
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub steps: Vec<String>,
    pub expected_duration_ms: u64,
    pub user_interaction_required: bool,
}

/// Test report generator for creating formatted reports
#[derive(Debug)]
pub struct TestReportGenerator {
    test_results: Vec<TestResultSummary>,
    metrics: Vec<UserExperienceMetrics>,
}

#[derive(Debug, Clone)]
pub struct TestResultSummary {
    pub test_name: String,
    pub passed: bool,
    pub execution_time_ms: u64,
    pub details: String,
}

impl TestReportGenerator {
    /// Create a new report generator
    pub fn new() -> Self {
        Self {
            test_results: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// Add a test result to the report
    pub fn add_test_result(&mut self, result: TestResultSummary) {
        self.test_results.push(result);
    }

    /// Add user experience metrics to the report
    pub fn add_metrics(&mut self, metrics: UserExperienceMetrics) {
        self.metrics.push(metrics);
    }

    /// Generate a formatted report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        
        report.push_str("=== MultiOS UAT Test Report ===\n\n");
        
        // Test Results Summary
        report.push_str("Test Results:\n");
        report.push_str("-------------\n");
        for result in &self.test_results {
            let status = if result.passed { "PASS" } else { "FAIL" };
            report.push_str(&format!("{}: {} ({})\n", result.test_name, status, result.details));
        }
        
        // Overall Statistics
        let total_tests = self.test_results.len();
        let passed_tests = self.test_results.iter().filter(|r| r.passed).count();
        let success_rate = if total_tests > 0 {
            (passed_tests as f64 / total_tests as f64) * 100.0
        } else {
            0.0
        };
        
        report.push_str(&format!("\nSuccess Rate: {:.1}% ({}/{})\n", success_rate, passed_tests, total_tests));
        
        // User Experience Metrics
        if !self.metrics.is_empty() {
            report.push_str("\nUser Experience Metrics:\n");
            report.push_str("-------------------------\n");
            
            let avg_completion_time = average(self.metrics.iter().map(|m| m.command_completion_time_ms).collect());
            let avg_api_time = average(self.metrics.iter().map(|m| m.api_response_time_ms).collect());
            let avg_satisfaction = average(self.metrics.iter().map(|m| m.user_satisfaction_score).collect());
            
            report.push_str(&format!("Avg Command Completion: {:.0}ms\n", avg_completion_time));
            report.push_str(&format!("Avg API Response Time: {:.0}ms\n", avg_api_time));
            report.push_str(&format!("Avg User Satisfaction: {:.1}%\n", avg_satisfaction * 100.0));
        }
        
        report
    }
}

/// Helper function to calculate average
fn average(values: Vec<u64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}

/// Helper function to get current time in milliseconds
fn get_current_time_ms() -> u64 {
    // In a real implementation, this would get actual system time
    // For simulation, return a static value
    1635724800000
}

/// Mock data for testing without actual system dependencies
#[derive(Debug)]
pub struct MockDataProvider;

impl MockDataProvider {
    /// Provide mock user data for testing
    pub fn mock_user_data() -> Vec<(String, String, String)> {
        vec![
            ("alice".to_string(), "Administrator".to_string(), "alice@example.com".to_string()),
            ("bob".to_string(), "User".to_string(), "bob@example.com".to_string()),
            ("charlie".to_string(), "Guest".to_string(), "charlie@example.com".to_string()),
        ]
    }

    /// Provide mock configuration data
    pub fn mock_config_data() -> Vec<(String, String)> {
        vec![
            ("network.enabled".to_string(), "true".to_string()),
            ("security.policy_level".to_string(), "medium".to_string()),
            ("logging.level".to_string(), "INFO".to_string()),
            ("update.auto_check".to_string(), "true".to_string()),
        ]
    }

    /// Provide mock process data
    pub fn mock_process_data() -> Vec<(String, u32, String)> {
        vec![
            ("apache2".to_string(), 1234, "running".to_string()),
            ("mysql".to_string(), 5678, "running".to_string()),
            ("nginx".to_string(), 9012, "stopped".to_string()),
        ]
    }

    /// Provide mock API endpoints
    pub fn mock_api_endpoints() -> Vec<String> {
        vec![
            "/api/v1/system/info".to_string(),
            "/api/v1/system/status".to_string(),
            "/api/v1/users".to_string(),
            "/api/v1/config".to_string(),
            "/api/v1/processes".to_string(),
        ]
    }

    /// Provide mock documentation sections
    pub fn mock_documentation_sections() -> Vec<String> {
        vec![
            "User Management Guide".to_string(),
            "System Configuration Guide".to_string(),
            "Security Administration Guide".to_string(),
            "Network Configuration Guide".to_string(),
            "Troubleshooting Guide".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_timer() {
        let mut timer = TestTimer::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let elapsed = timer.stop();
        assert!(elapsed >= 10);
    }

    #[test]
    fn test_data_generator() {
        let mut generator = TestDataGenerator::new(Some(42));
        let user = generator.generate_test_user();
        assert!(user.starts_with("testuser_"));
        
        let (key, value) = generator.generate_test_config();
        assert!(!key.is_empty());
        assert!(!value.is_empty());
    }

    #[test]
    fn test_validator() {
        assert!(TestValidator::assert_in_range(5, 1, 10));
        assert!(!TestValidator::assert_in_range(15, 1, 10));
        
        assert!(TestValidator::assert_acceptable_response_time(100, 500));
        assert!(!TestValidator::assert_acceptable_response_time(600, 500));
    }

    #[test]
    fn test_scenario_builder() {
        let mut builder = TestScenarioBuilder::new("Test Scenario");
        builder.add_step("Step 1")
            .add_step("Step 2")
            .set_expected_duration(5000)
            .set_user_interaction(true);
        
        let scenario = builder.build();
        assert_eq!(scenario.name, "Test Scenario");
        assert_eq!(scenario.steps.len(), 2);
        assert_eq!(scenario.expected_duration_ms, 5000);
        assert!(scenario.user_interaction_required);
    }

    #[test]
    fn test_report_generator() {
        let mut generator = TestReportGenerator::new();
        
        generator.add_test_result(TestResultSummary {
            test_name: "Shell Usability".to_string(),
            passed: true,
            execution_time_ms: 1000,
            details: "All tests passed".to_string(),
        });
        
        let report = generator.generate_report();
        assert!(report.contains("Shell Usability"));
        assert!(report.contains("PASS"));
    }

    #[test]
    fn test_mock_data_provider() {
        let users = MockDataProvider::mock_user_data();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].0, "alice");
        
        let config = MockDataProvider::mock_config_data();
        assert!(config.iter().any(|(k, _)| k == "network.enabled"));
    }
}