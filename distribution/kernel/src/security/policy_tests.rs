//! Security Policy Framework Tests
//! 
//! This module contains tests for the security policy framework
//! to ensure proper functionality and integration.

#![no_std]

use crate::security::policy::*;
use crate::security::security_types::*;
use crate::security::integration::*;
use alloc::vec::Vec;
use alloc::string::String;
use alloc::collections::HashMap;

/// Test policy creation
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_policy_creation() {
        let policy = SecurityPolicy {
            policy_id: "test_policy".to_string(),
            name: "Test Policy".to_string(),
            description: "A test policy for testing".to_string(),
            version: PolicyVersion { major: 1, minor: 0, patch: 0, build: 1 },
            category: RuleCategory::Access,
            priority: PolicyPriority::Normal,
            scope: PolicyScope::System,
            conditions: Vec::new(),
            rules: Vec::new(),
            enforcement_mode: EnforcementMode::Audit,
            enabled: core::sync::atomic::AtomicBool::new(true),
            created_at: 1000000,
            updated_at: 1000000,
            expires_at: None,
            tags: vec!["test".to_string()],
            metadata: HashMap::new(),
        };

        assert_eq!(policy.name, "Test Policy");
        assert_eq!(policy.category, RuleCategory::Access);
        assert!(policy.enabled.load(core::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn test_security_rule_creation() {
        let rule = SecurityRule {
            rule_id: "test_rule".to_string(),
            name: "Test Rule".to_string(),
            category: RuleCategory::Access,
            description: "A test rule".to_string(),
            parameters: RuleParameters {
                timeout: 5000,
                retry_count: 3,
                cache_ttl: 60,
                enable_audit: true,
                quarantine_on_violation: false,
                isolation_level: 2,
                resource_pool: Some("test".to_string()),
            },
            actions: vec![
                RuleAction {
                    action_type: ActionType::Allow,
                    parameters: HashMap::new(),
                    target: ActionTarget::SelfTarget,
                    delay: 0,
                    retry_count: 0,
                    on_failure: FailureAction::Continue,
                }
            ],
            conditions: Vec::new(),
            enabled: true,
            priority: PolicyPriority::Normal,
            rate_limits: None,
            resource_limits: None,
        };

        assert_eq!(rule.rule_id, "test_rule");
        assert_eq!(rule.category, RuleCategory::Access);
        assert!(rule.enabled);
    }

    #[test]
    fn test_evaluation_context_creation() {
        let context = EvaluationContext {
            user_id: 1001,
            session_id: 12345,
            service_id: "test_service".to_string(),
            resource_id: "test_resource".to_string(),
            resource_type: "file".to_string(),
            operation: "read".to_string(),
            security_level: crate::admin::security::SecurityLevel::Medium,
            timestamp: 1000000,
            namespace: "test".to_string(),
            roles: vec!["user".to_string()],
            metadata: HashMap::new(),
        };

        assert_eq!(context.user_id, 1001);
        assert_eq!(context.operation, "read");
        assert_eq!(context.resource_type, "file");
    }

    #[test]
    fn test_policy_violation_creation() {
        let violation = PolicyViolation {
            violation_id: "violation_1".to_string(),
            policy_id: "test_policy".to_string(),
            rule_category: RuleCategory::Access,
            violation_type: ViolationType::UnauthorizedAccess,
            severity: PolicyPriority::High,
            timestamp: 1000000,
            source_context: "user_1001".to_string(),
            target_context: "resource_1".to_string(),
            details: "Unauthorized access attempt".to_string(),
            remediation: ViolationRemediation::Alert,
        };

        assert_eq!(violation.violation_id, "violation_1");
        assert_eq!(violation.violation_type, ViolationType::UnauthorizedAccess);
        assert_eq!(violation.severity, PolicyPriority::High);
    }

    #[test]
    fn test_evaluation_result_creation() {
        let result = EvaluationResult {
            allowed: false,
            policy_matches: Vec::new(),
            conflicts: Vec::new(),
            violations: Vec::new(),
            enforcement_level: EnforcementMode::Hard,
            audit_required: true,
            quarantine_required: false,
        };

        assert!(!result.allowed);
        assert_eq!(result.enforcement_level, EnforcementMode::Hard);
        assert!(result.audit_required);
    }

    #[test]
    fn test_framework_config_creation() {
        let config = SecurityFrameworkConfig {
            enable_policy_enforcement: true,
            enable_violation_logging: true,
            enable_propagation: true,
            enable_versioning: true,
            max_policy_cache_size: 10000,
            violation_retention_days: 30,
            propagation_timeout_ms: 5000,
            evaluation_cache_ttl: 300,
            enable_real_time_monitoring: true,
            audit_integration_enabled: true,
            config_integration_enabled: true,
            conflict_resolution_strategy: "highest_priority".to_string(),
        };

        assert!(config.enable_policy_enforcement);
        assert!(config.enable_violation_logging);
        assert_eq!(config.max_policy_cache_size, 10000);
        assert_eq!(config.violation_retention_days, 30);
    }

    #[test]
    fn test_policy_scope_variants() {
        // Test different policy scope variants
        let system_scope = PolicyScope::System;
        let service_scope = PolicyScope::Service("test_service".to_string());
        let user_scope = PolicyScope::User("test_user".to_string());
        let time_scope = PolicyScope::TimeWindow { start: 1000000, end: 2000000 };
        
        // These would be tested in actual evaluation logic
        assert!(matches!(system_scope, PolicyScope::System));
        assert!(matches!(service_scope, PolicyScope::Service(_)));
        assert!(matches!(user_scope, PolicyScope::User(_)));
        assert!(matches!(time_scope, PolicyScope::TimeWindow { .. }));
    }

    #[test]
    fn test_rule_categories() {
        // Test all rule categories
        let categories = [
            RuleCategory::Access,
            RuleCategory::Process,
            RuleCategory::Network,
            RuleCategory::Data,
            RuleCategory::System,
            RuleCategory::User,
            RuleCategory::Resource,
            RuleCategory::Compliance,
        ];

        for category in &categories {
            assert!(matches!(*category, RuleCategory::Access..=RuleCategory::Compliance));
        }
    }

    #[test]
    fn test_enforcement_modes() {
        // Test all enforcement modes
        let modes = [
            EnforcementMode::Disabled,
            EnforcementMode::Audit,
            EnforcementMode::Soft,
            EnforcementMode::Hard,
            EnforcementMode::Strict,
            EnforcementMode::Emergency,
        ];

        for mode in &modes {
            assert!(matches!(*mode, EnforcementMode::Disabled..=EnforcementMode::Emergency));
        }
    }

    #[test]
    fn test_priority_levels() {
        // Test priority ordering
        assert!(PolicyPriority::Lowest < PolicyPriority::Low);
        assert!(PolicyPriority::Low < PolicyPriority::Normal);
        assert!(PolicyPriority::Normal < PolicyPriority::High);
        assert!(PolicyPriority::High < PolicyPriority::Critical);
        assert!(PolicyPriority::Critical < PolicyPriority::System);
    }

    #[test]
    fn test_condition_operators() {
        // Test condition operators
        let operators = [
            ConditionOperator::Equals,
            ConditionOperator::NotEquals,
            ConditionOperator::GreaterThan,
            ConditionOperator::LessThan,
            ConditionOperator::Contains,
            ConditionOperator::StartsWith,
            ConditionOperator::EndsWith,
            ConditionOperator::RegexMatch,
            ConditionOperator::InSet,
            ConditionOperator::NotInSet,
            ConditionOperator::Exists,
            ConditionOperator::NotExists,
        ];

        for operator in &operators {
            assert!(matches!(*operator, ConditionOperator::Equals..=ConditionOperator::NotExists));
        }
    }

    #[test]
    fn test_violation_types() {
        // Test violation types
        let violations = [
            ViolationType::UnauthorizedAccess,
            ViolationType::ResourceExceeded,
            ViolationType::CapabilityViolation,
            ViolationType::TimeConstraint,
            ViolationType::NetworkViolation,
            ViolationType::DataClassification,
            ViolationType::ProcessViolation,
            ViolationType::SystemIntegrity,
            ViolationType::ComplianceBreach,
        ];

        for violation in &violations {
            assert!(matches!(*violation, ViolationType::UnauthorizedAccess..=ViolationType::ComplianceBreach));
        }
    }

    #[test]
    fn test_action_types() {
        // Test action types
        let actions = [
            ActionType::Allow,
            ActionType::Deny,
            ActionType::Log,
            ActionType::Audit,
            ActionType::Alert,
            ActionType::Throttle,
            ActionType::Quarantine,
            ActionType::Terminate,
            ActionType::Redirect,
            ActionType::Modify,
            ActionType::Isolate,
            ActionType::Notify,
            ActionType::Rollback,
            ActionType::Failover,
            ActionType::Scale,
            ActionType::LoadBalance,
        ];

        for action in &actions {
            assert!(matches!(*action, ActionType::Allow..=ActionType::LoadBalance));
        }
    }

    #[test]
    fn test_condition_value_types() {
        // Test condition value types
        let string_value = ConditionValue::String("test".to_string());
        let integer_value = ConditionValue::Integer(42);
        let unsigned_value = ConditionValue::Unsigned(42);
        let float_value = ConditionValue::Float(3.14);
        let boolean_value = ConditionValue::Boolean(true);
        let set_value = ConditionValue::Set(vec!["a".to_string(), "b".to_string()]);
        let range_value = ConditionValue::Range { min: 1, max: 100 };
        let time_range_value = ConditionValue::TimeRange { start: 1000000, end: 2000000 };

        assert!(matches!(string_value, ConditionValue::String(_)));
        assert!(matches!(integer_value, ConditionValue::Integer(_)));
        assert!(matches!(unsigned_value, ConditionValue::Unsigned(_)));
        assert!(matches!(float_value, ConditionValue::Float(_)));
        assert!(matches!(boolean_value, ConditionValue::Boolean(_)));
        assert!(matches!(set_value, ConditionValue::Set(_)));
        assert!(matches!(range_value, ConditionValue::Range { .. }));
        assert!(matches!(time_range_value, ConditionValue::TimeRange { .. }));
    }

    #[test]
    fn test_resource_limits() {
        let limits = ResourceLimit {
            memory_mb: 1024,
            cpu_percent: 50,
            disk_io_mb: 100,
            network_bandwidth_mbps: 100,
            file_descriptors: 1000,
            processes: 10,
        };

        assert_eq!(limits.memory_mb, 1024);
        assert_eq!(limits.cpu_percent, 50);
        assert_eq!(limits.disk_io_mb, 100);
        assert_eq!(limits.network_bandwidth_mbps, 100);
        assert_eq!(limits.file_descriptors, 1000);
        assert_eq!(limits.processes, 10);
    }

    #[test]
    fn test_rate_limits() {
        let rate_limit = RateLimit {
            requests_per_second: 100,
            requests_per_minute: 1000,
            requests_per_hour: 10000,
            burst_size: 20,
            window_size: 60,
        };

        assert_eq!(rate_limit.requests_per_second, 100);
        assert_eq!(rate_limit.requests_per_minute, 1000);
        assert_eq!(rate_limit.requests_per_hour, 10000);
        assert_eq!(rate_limit.burst_size, 20);
        assert_eq!(rate_limit.window_size, 60);
    }

    #[test]
    fn test_policy_version() {
        let version = PolicyVersion {
            major: 1,
            minor: 2,
            patch: 3,
            build: 4,
        };

        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 2);
        assert_eq!(version.patch, 3);
        assert_eq!(version.build, 4);
    }

    #[test]
    fn test_framework_statistics() {
        let stats = FrameworkStats {
            policy_evaluations: 1000,
            violations_detected: 5,
            policies_propagated: 50,
            rollbacks_performed: 2,
            audit_integrations: 3,
            config_integrations: 2,
            active_enforcement_points: 10,
            services_monitored: 15,
            last_violation: 2000000,
            system_security_score: 95.5,
        };

        assert_eq!(stats.policy_evaluations, 1000);
        assert_eq!(stats.violations_detected, 5);
        assert_eq!(stats.policies_propagated, 50);
        assert_eq!(stats.rollbacks_performed, 2);
        assert_eq!(stats.active_enforcement_points, 10);
        assert_eq!(stats.services_monitored, 15);
        assert_eq!(stats.system_security_score, 95.5);
    }
}

/// Integration tests for the security policy framework
#[cfg(test)]
mod integration_tests {
    use super::*;
    use alloc::sync::Arc;

    #[test]
    fn test_integration_manager_creation() {
        let manager = PolicyIntegrationManager::new();
        // Test that the manager is created successfully
        assert!(true); // If we got here, creation succeeded
    }

    #[test]
    fn test_evaluation_context_with_metadata() {
        let mut metadata = HashMap::new();
        metadata.insert("source_ip".to_string(), "192.168.1.100".to_string());
        metadata.insert("user_agent".to_string(), "test_client".to_string());
        
        let context = EvaluationContext {
            user_id: 1001,
            session_id: 12345,
            service_id: "web_service".to_string(),
            resource_id: "/api/data".to_string(),
            resource_type: "api_endpoint".to_string(),
            operation: "GET".to_string(),
            security_level: crate::admin::security::SecurityLevel::High,
            timestamp: 1000000,
            namespace: "api".to_string(),
            roles: vec!["api_user".to_string(), "read_only".to_string()],
            metadata,
        };

        assert_eq!(context.metadata.get("source_ip").unwrap(), "192.168.1.100");
        assert_eq!(context.metadata.get("user_agent").unwrap(), "test_client");
        assert_eq!(context.roles.len(), 2);
    }

    #[test]
    fn test_complex_policy_scenario() {
        // Test a more complex policy scenario with multiple rules and conditions
        
        // Create a file access policy
        let file_access_policy = SecurityPolicy {
            policy_id: "file_access_policy".to_string(),
            name: "File Access Control".to_string(),
            description: "Controls file system access".to_string(),
            version: PolicyVersion { major: 1, minor: 0, patch: 0, build: 1 },
            category: RuleCategory::Access,
            priority: PolicyPriority::High,
            scope: PolicyScope::Namespace("production".to_string()),
            conditions: vec![
                PolicyCondition {
                    field: "security_level".to_string(),
                    operator: ConditionOperator::GreaterThan,
                    value: ConditionValue::Unsigned(2), // Medium level or higher
                    case_sensitive: false,
                }
            ],
            rules: vec![
                SecurityRule {
                    rule_id: "read_access".to_string(),
                    name: "Read Access Rule".to_string(),
                    category: RuleCategory::Access,
                    description: "Allows read access to files".to_string(),
                    parameters: RuleParameters {
                        timeout: 5000,
                        retry_count: 3,
                        cache_ttl: 60,
                        enable_audit: true,
                        quarantine_on_violation: false,
                        isolation_level: 2,
                        resource_pool: Some("filesystem".to_string()),
                    },
                    actions: vec![
                        RuleAction {
                            action_type: ActionType::Allow,
                            parameters: HashMap::new(),
                            target: ActionTarget::SelfTarget,
                            delay: 0,
                            retry_count: 0,
                            on_failure: FailureAction::Continue,
                        }
                    ],
                    conditions: vec![
                        PolicyCondition {
                            field: "operation".to_string(),
                            operator: ConditionOperator::Equals,
                            value: ConditionValue::String("read".to_string()),
                            case_sensitive: false,
                        }
                    ],
                    enabled: true,
                    priority: PolicyPriority::High,
                    rate_limits: Some(RateLimit {
                        requests_per_second: 100,
                        requests_per_minute: 1000,
                        requests_per_hour: 10000,
                        burst_size: 20,
                        window_size: 60,
                    }),
                    resource_limits: Some(ResourceLimit {
                        memory_mb: 512,
                        cpu_percent: 25,
                        disk_io_mb: 50,
                        network_bandwidth_mbps: 10,
                        file_descriptors: 100,
                        processes: 5,
                    }),
                }
            ],
            enforcement_mode: EnforcementMode::Hard,
            enabled: core::sync::atomic::AtomicBool::new(true),
            created_at: 1000000,
            updated_at: 1000000,
            expires_at: None,
            tags: vec!["access".to_string(), "filesystem".to_string()],
            metadata: HashMap::new(),
        };

        assert_eq!(file_access_policy.rules.len(), 1);
        assert_eq!(file_access_policy.conditions.len(), 1);
        assert_eq!(file_access_policy.priority, PolicyPriority::High);
    }
}