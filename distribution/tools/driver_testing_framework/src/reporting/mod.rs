//! Reporting Module
//!
//! This module provides comprehensive reporting capabilities for the driver testing framework,
//! including test result aggregation, performance analysis, failure reporting, and
//! executive summaries.

use crate::core::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, SystemTime};

pub struct ReportGenerator {
    /// Report configuration
    config: ReportConfig,
    
    /// Report templates
    templates: HashMap<ReportType, ReportTemplate>,
    
    /// Report history
    report_history: VecDeque<GeneratedReport>,
}

impl ReportGenerator {
    /// Create a new report generator
    pub fn new() -> Self {
        let mut generator = Self {
            config: ReportConfig::default(),
            templates: HashMap::new(),
            report_history: VecDeque::new(),
        };
        
        // Initialize report templates
        generator.initialize_templates();
        
        generator
    }
    
    /// Initialize report templates
    fn initialize_templates(&mut self) {
        // Executive summary template
        self.templates.insert(ReportType::ExecutiveSummary, ReportTemplate {
            name: "Executive Summary".to_string(),
            format: ReportFormat::Text,
            sections: vec![
                "overview".to_string(),
                "key_findings".to_string(),
                "recommendations".to_string(),
                "action_items".to_string(),
            ],
        });
        
        // Detailed test report template
        self.templates.insert(ReportType::DetailedTestReport, ReportTemplate {
            name: "Detailed Test Report".to_string(),
            format: ReportFormat::Text,
            sections: vec![
                "test_summary".to_string(),
                "test_results".to_string(),
                "performance_analysis".to_string(),
                "failure_analysis".to_string(),
                "recommendations".to_string(),
            ],
        });
        
        // Performance analysis template
        self.templates.insert(ReportType::PerformanceAnalysis, ReportTemplate {
            name: "Performance Analysis".to_string(),
            format: ReportFormat::Text,
            sections: vec![
                "performance_overview".to_string(),
                "benchmark_results".to_string(),
                "trend_analysis".to_string(),
                "optimization_opportunities".to_string(),
            ],
        });
        
        // Compliance report template
        self.templates.insert(ReportType::ComplianceReport, ReportTemplate {
            name: "Compliance Report".to_string(),
            format: ReportFormat::Text,
            sections: vec![
                "compliance_summary".to_string(),
                "standard_compliance".to_string(),
                "security_assessment".to_string(),
                "violations".to_string(),
            ],
        });
    }
    
    /// Generate comprehensive test report
    pub fn generate_comprehensive_report(&self, results: &TestResults) -> Result<String, DriverTestError> {
        let mut report = String::new();
        
        // Header
        report.push_str(&self.generate_header("Comprehensive Driver Testing Report")?);
        
        // Executive Summary
        report.push_str(&self.generate_executive_summary(results)?);
        
        // Test Results Summary
        report.push_str(&self.generate_test_results_summary(results)?);
        
        // Performance Analysis
        report.push_str(&self.generate_performance_summary(results)?);
        
        // Security and Compliance
        report.push_str(&self.generate_compliance_summary(results)?);
        
        // Issues and Recommendations
        report.push_str(&self.generate_issues_and_recommendations(results)?);
        
        // Detailed Results
        report.push_str(&self.generate_detailed_results(results)?);
        
        // Footer
        report.push_str(&self.generate_footer()?);
        
        Ok(report)
    }
    
    /// Generate executive summary
    fn generate_executive_summary(&self, results: &TestResults) -> Result<String, DriverTestError> {
        let total_tests = results.total_tests();
        let passed_tests = results.passed_tests();
        let failed_tests = results.failed_tests();
        let skipped_tests = results.skipped_tests();
        
        let success_rate = if total_tests > 0 {
            (passed_tests as f32 / total_tests as f32) * 100.0
        } else {
            0.0
        };
        
        let summary = format!(
            "EXECUTIVE SUMMARY\n\
             ================\n\
             \n\
             Test Overview:\n\
             - Total Tests Executed: {}\n\
             - Passed: {} ({:.1}%)\n\
             - Failed: {} ({:.1}%)\n\
             - Skipped: {} ({:.1}%)\n\
             \n\
             Overall Assessment:\n\
             {}\n\
             \n\
             Key Metrics:\n\
             - Test Success Rate: {:.1}%\n\
             - Critical Issues: {}\n\
             - System Stability: {}\n\
             \n",
            total_tests,
            passed_tests,
            (passed_tests as f32 / total_tests as f32) * 100.0,
            failed_tests,
            (failed_tests as f32 / total_tests as f32) * 100.0,
            skipped_tests,
            (skipped_tests as f32 / total_tests as f32) * 100.0,
            if success_rate >= 95.0 {
                "EXCELLENT: System demonstrates high reliability and stability"
            } else if success_rate >= 85.0 {
                "GOOD: System shows good reliability with minor issues to address"
            } else if success_rate >= 70.0 {
                "ACCEPTABLE: System has some stability concerns requiring attention"
            } else {
                "POOR: System has significant issues requiring immediate attention"
            },
            success_rate,
            failed_tests,
            if success_rate >= 95.0 { "HIGH" } else if success_rate >= 85.0 { "GOOD" } else { "NEEDS IMPROVEMENT" }
        );
        
        Ok(summary)
    }
    
    /// Generate test results summary
    fn generate_test_results_summary(&self, results: &TestResults) -> Result<String, DriverTestError> {
        let mut summary = String::new();
        
        summary.push_str("TEST RESULTS SUMMARY\n");
        summary.push_str("====================\n\n");
        
        for (category, category_results) in &results.results {
            summary.push_str(&format!("{} Tests:\n", category));
            summary.push_str(&format!("  Total: {}\n", category_results.len()));
            
            let passed = category_results.iter().filter(|r| r.status == TestStatus::Passed).count();
            let failed = category_results.iter().filter(|r| r.status == TestStatus::Failed).count();
            let skipped = category_results.iter().filter(|r| r.status == TestStatus::Skipped).count();
            
            summary.push_str(&format!("  Passed: {} ({:.1}%)\n", 
                passed, (passed as f32 / category_results.len() as f32) * 100.0));
            summary.push_str(&format!("  Failed: {} ({:.1}%)\n", 
                failed, (failed as f32 / category_results.len() as f32) * 100.0));
            summary.push_str(&format!("  Skipped: {} ({:.1}%)\n\n", 
                skipped, (skipped as f32 / category_results.len() as f32) * 100.0));
        }
        
        Ok(summary)
    }
    
    /// Generate performance summary
    fn generate_performance_summary(&self, results: &TestResults) -> Result<String, DriverTestError> {
        let mut summary = String::new();
        
        summary.push_str("PERFORMANCE ANALYSIS\n");
        summary.push_str("====================\n\n");
        
        // Collect performance data
        let mut total_execution_time = Duration::from_secs(0);
        let mut performance_metrics = Vec::new();
        
        for (_category, category_results) in &results.results {
            for result in category_results {
                total_execution_time += result.duration;
                
                if let Some(metrics) = &result.metrics {
                    performance_metrics.push(metrics);
                }
            }
        }
        
        summary.push_str(&format!("Total Execution Time: {:?}\n", total_execution_time));
        
        if !performance_metrics.is_empty() {
            // Calculate average metrics
            let avg_cpu_usage = performance_metrics.iter()
                .map(|m| m.cpu_usage.usage_percent)
                .sum::<f32>() / performance_metrics.len() as f32;
            
            let total_memory_usage = performance_metrics.iter()
                .map(|m| m.memory_usage.peak_usage)
                .sum::<u64>();
            
            let avg_memory_usage = total_memory_usage / performance_metrics.len() as u64;
            
            let total_io_operations = performance_metrics.iter()
                .map(|m| m.io_metrics.read_operations + m.io_metrics.write_operations)
                .sum::<u64>();
            
            summary.push_str(&format!("Average CPU Usage: {:.1}%\n", avg_cpu_usage));
            summary.push_str(&format!("Average Memory Usage: {} bytes\n", avg_memory_usage));
            summary.push_str(&format!("Total I/O Operations: {}\n", total_io_operations));
        }
        
        summary.push('\n');
        Ok(summary)
    }
    
    /// Generate compliance summary
    fn generate_compliance_summary(&self, results: &TestResults) -> Result<String, DriverTestError> {
        let mut summary = String::new();
        
        summary.push_str("COMPLIANCE & SECURITY\n");
        summary.push_str("=====================\n\n");
        
        let compliance_results = results.get_results_by_category("compliance")
            .map(|r| r.iter().filter(|r| r.category == TestCategory::Security || r.category == TestCategory::Compliance))
            .into_iter().flatten();
        
        let security_results = results.get_results_by_category("validation")
            .map(|r| r.iter().filter(|r| r.category == TestCategory::Security))
            .into_iter().flatten();
        
        let compliance_passed = compliance_results.clone().filter(|r| r.status == TestStatus::Passed).count();
        let compliance_total = compliance_results.clone().count();
        
        let security_passed = security_results.clone().filter(|r| r.status == TestStatus::Passed).count();
        let security_total = security_results.clone().count();
        
        summary.push_str(&format!("Compliance Status:\n"));
        summary.push_str(&format!("  Passed: {}/{}\n", compliance_passed, compliance_total));
        summary.push_str(&format!("  Compliance Rate: {:.1}%\n\n", 
            if compliance_total > 0 { (compliance_passed as f32 / compliance_total as f32) * 100.0 } else { 100.0 }));
        
        summary.push_str(&format!("Security Status:\n"));
        summary.push_str(&format!("  Passed: {}/{}\n", security_passed, security_total));
        summary.push_str(&format!("  Security Score: {:.1}%\n\n", 
            if security_total > 0 { (security_passed as f32 / security_total as f32) * 100.0 } else { 100.0 }));
        
        Ok(summary)
    }
    
    /// Generate issues and recommendations
    fn generate_issues_and_recommendations(&self, results: &TestResults) -> Result<String, DriverTestError> {
        let mut section = String::new();
        
        section.push_str("ISSUES & RECOMMENDATIONS\n");
        section.push_str("========================\n\n");
        
        // Collect failed tests
        let mut failed_tests = Vec::new();
        for (_category, category_results) in &results.results {
            for result in category_results {
                if result.status == TestStatus::Failed {
                    failed_tests.push(result);
                }
            }
        }
        
        if failed_tests.is_empty() {
            section.push_str("No critical issues detected. System is operating normally.\n\n");
        } else {
            section.push_str(&format!("Critical Issues Found: {}\n\n", failed_tests.len()));
            
            section.push_str("Failed Tests:\n");
            for test in &failed_tests {
                section.push_str(&format!("  - {}: {}\n", test.name, test.message));
            }
            section.push('\n');
            
            // Generate recommendations based on failure patterns
            section.push_str("Recommendations:\n");
            let mut recommendations = self.generate_failure_based_recommendations(&failed_tests);
            for recommendation in recommendations {
                section.push_str(&format!("  - {}\n", recommendation));
            }
            section.push('\n');
        }
        
        Ok(section)
    }
    
    /// Generate detailed results
    fn generate_detailed_results(&self, results: &TestResults) -> Result<String, DriverTestError> {
        let mut section = String::new();
        
        section.push_str("DETAILED TEST RESULTS\n");
        section.push_str("=====================\n\n");
        
        for (category, category_results) in &results.results {
            section.push_str(&format!("{} Category:\n", category.to_uppercase()));
            section.push_str(&format!("{:-<50}\n", ""));
            
            for result in category_results {
                section.push_str(&format!("\nTest: {}\n", result.name));
                section.push_str(&format!("Status: {}\n", result.status));
                section.push_str(&format!("Duration: {:?}\n", result.duration));
                section.push_str(&format!("Message: {}\n", result.message));
                
                if let Some(metrics) = &result.metrics {
                    section.push_str(&format!("  CPU Usage: {:.1}%\n", metrics.cpu_usage.usage_percent));
                    section.push_str(&format!("  Memory Usage: {} bytes\n", metrics.memory_usage.peak_usage));
                    section.push_str(&format!("  I/O Operations: {}\n", 
                        metrics.io_metrics.read_operations + metrics.io_metrics.write_operations));
                }
                
                section.push_str(&format!("{:-<50}\n", ""));
            }
            
            section.push('\n');
        }
        
        Ok(section)
    }
    
    /// Generate header
    fn generate_header(&self, title: &str) -> Result<String, DriverTestError> {
        let header = format!(
            "{}\n{}\n{}\n\n\
             Report Generated: {}\n\
             Framework Version: {}\n\
             {}\n\n",
            "=".repeat(80),
            title,
            "=".repeat(80),
            SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)
                .unwrap_or_default().as_secs(),
            "1.0.0", // Framework version
            "=".repeat(80)
        );
        
        Ok(header)
    }
    
    /// Generate footer
    fn generate_footer(&self) -> Result<String, DriverTestError> {
        let footer = format!(
            "\n{0}\n\
             End of Report\n\
             Generated by MultiOS Driver Testing Framework\n\
             {0}\n",
            "=".repeat(80)
        );
        
        Ok(footer)
    }
    
    /// Generate failure-based recommendations
    fn generate_failure_based_recommendations(&self, failed_tests: &[&TestResult]) -> Vec<String> {
        let mut recommendations = Vec::new();
        
        let failure_patterns: HashMap<String, usize> = failed_tests.iter()
            .map(|test| {
                if test.name.contains("memory") {
                    ("memory_issues".to_string(), 1)
                } else if test.name.contains("performance") {
                    ("performance_issues".to_string(), 1)
                } else if test.name.contains("validation") {
                    ("validation_issues".to_string(), 1)
                } else {
                    ("general_issues".to_string(), 1)
                }
            })
            .fold(HashMap::new(), |mut acc, (pattern, count)| {
                *acc.entry(pattern).or_insert(0) += count;
                acc
            });
        
        for (pattern, count) in &failure_patterns {
            match pattern.as_str() {
                "memory_issues" => {
                    recommendations.push(format!(
                        "Review memory management - {} memory-related failures detected", count
                    ));
                    recommendations.push("Implement proper memory cleanup and leak detection");
                },
                "performance_issues" => {
                    recommendations.push(format!(
                        "Optimize performance - {} performance-related failures detected", count
                    ));
                    recommendations.push("Review algorithm efficiency and resource utilization");
                },
                "validation_issues" => {
                    recommendations.push(format!(
                        "Improve validation - {} validation-related failures detected", count
                    ));
                    recommendations.push("Enhance input validation and error handling");
                },
                _ => {
                    recommendations.push(format!(
                        "Investigate general issues - {} failures need analysis", count
                    ));
                }
            }
        }
        
        // Add general recommendations
        if failed_tests.len() > 5 {
            recommendations.push("Consider comprehensive system review due to high failure count");
        }
        
        recommendations.push("Review driver implementation for compliance with framework standards");
        recommendations.push("Ensure proper error handling and resource management");
        
        recommendations
    }
    
    /// Save report to file
    pub fn save_report_to_file(&self, report: &str, filename: &str) -> Result<(), DriverTestError> {
        use std::fs;
        
        match fs::write(filename, report) {
            Ok(_) => {
                log::info!("Report saved to file: {}", filename);
                Ok(())
            },
            Err(e) => Err(DriverTestError::ConfigurationError(
                format!("Failed to save report to file: {}", e)
            )),
        }
    }
    
    /// Generate report for specific test category
    pub fn generate_category_report(&self, results: &TestResults, category: &str) -> Result<String, DriverTestError> {
        if let Some(category_results) = results.get_results_by_category(category) {
            let mut report = format!("{} Test Report\n", category.to_uppercase());
            report.push_str(&"=".repeat(category.len() + 11));
            report.push('\n');
            
            report.push_str(&format!("Tests in {} category: {}\n\n", category, category_results.len()));
            
            for result in category_results {
                report.push_str(&format!("Test: {}\n", result.name));
                report.push_str(&format!("Status: {}\n", result.status));
                report.push_str(&format!("Message: {}\n\n", result.message));
            }
            
            Ok(report)
        } else {
            Err(DriverTestError::ConfigurationError(
                format!("Category '{}' not found in results", category)
            ))
        }
    }
    
    /// Generate JSON report
    pub fn generate_json_report(&self, results: &TestResults) -> Result<String, DriverTestError> {
        let json_data = serde_json::to_string_pretty(results)
            .map_err(|e| DriverTestError::ConfigurationError(
                format!("Failed to serialize results to JSON: {}", e)
            ))?;
        
        Ok(json_data)
    }
    
    /// Generate trend analysis report
    pub fn generate_trend_analysis(&self, historical_results: &[&TestResults]) -> Result<String, DriverTestError> {
        if historical_results.len() < 2 {
            return Ok("Insufficient historical data for trend analysis".to_string());
        }
        
        let mut analysis = String::new();
        analysis.push_str("TREND ANALYSIS\n");
        analysis.push_str("==============\n\n");
        
        let mut trend_data = Vec::new();
        for (i, results) in historical_results.iter().enumerate() {
            let success_rate = if results.total_tests() > 0 {
                (results.passed_tests() as f32 / results.total_tests() as f32) * 100.0
            } else {
                0.0
            };
            trend_data.push((i, success_rate));
        }
        
        analysis.push_str("Success Rate Trends:\n");
        for (test_run, success_rate) in &trend_data {
            analysis.push_str(&format!("  Run {}: {:.1}%\n", test_run + 1, success_rate));
        }
        
        // Calculate trend
        if trend_data.len() >= 2 {
            let first_rate = trend_data[0].1;
            let last_rate = trend_data[trend_data.len() - 1].1;
            let trend_direction = if last_rate > first_rate {
                "IMPROVING"
            } else if last_rate < first_rate {
                "DEGRADING"
            } else {
                "STABLE"
            };
            
            analysis.push_str(&format!("\nOverall Trend: {}\n", trend_direction));
            analysis.push_str(&format!("Change: {:.1} percentage points\n", last_rate - first_rate));
        }
        
        Ok(analysis)
    }
}

// Supporting structures

/// Report configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub include_performance_metrics: bool,
    pub include_detailed_logs: bool,
    pub report_format: ReportFormat,
    pub max_history_size: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_performance_metrics: true,
            include_detailed_logs: false,
            report_format: ReportFormat::Text,
            max_history_size: 100,
        }
    }
}

/// Report types
#[derive(Debug, Clone, Copy)]
pub enum ReportType {
    ExecutiveSummary,
    DetailedTestReport,
    PerformanceAnalysis,
    ComplianceReport,
}

/// Report formats
#[derive(Debug, Clone, Copy)]
pub enum ReportFormat {
    Text,
    Json,
    Xml,
    Html,
}

/// Report template
#[derive(Debug, Clone)]
pub struct ReportTemplate {
    pub name: String,
    pub format: ReportFormat,
    pub sections: Vec<String>,
}

/// Generated report
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub id: String,
    pub timestamp: SystemTime,
    pub report_type: ReportType,
    pub content: String,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_report_generator_creation() {
        let generator = ReportGenerator::new();
        assert_eq!(generator.templates.len() > 0, true);
    }
    
    #[test]
    fn test_comprehensive_report_generation() {
        let generator = ReportGenerator::new();
        
        let mut results = TestResults::new();
        let test_result = TestResult {
            name: "test_validation".to_string(),
            status: TestStatus::Passed,
            duration: std::time::Duration::from_millis(100),
            message: "Test passed".to_string(),
            category: TestCategory::Validation,
            metadata: None,
            metrics: None,
        };
        
        results.add_results("validation", vec![test_result]);
        
        let report = generator.generate_comprehensive_report(&results).unwrap();
        assert!(report.contains("Comprehensive Driver Testing Report"));
        assert!(report.contains("EXECUTIVE SUMMARY"));
        assert!(report.contains("TEST RESULTS SUMMARY"));
    }
    
    #[test]
    fn test_json_report_generation() {
        let generator = ReportGenerator::new();
        
        let mut results = TestResults::new();
        let test_result = TestResult {
            name: "test_performance".to_string(),
            status: TestStatus::Passed,
            duration: std::time::Duration::from_millis(200),
            message: "Performance test passed".to_string(),
            category: TestCategory::Performance,
            metadata: None,
            metrics: None,
        };
        
        results.add_results("performance", vec![test_result]);
        
        let json_report = generator.generate_json_report(&results).unwrap();
        assert!(json_report.contains("results"));
        assert!(json_report.contains("performance"));
    }
}
