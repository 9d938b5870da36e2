//! System-Wide Security Policy Framework
//! 
//! This module provides comprehensive security policy management for the entire system,
//! including policy definitions, enforcement, evaluation, propagation, and monitoring.

#![no_std]

use alloc::vec::Vec;
use alloc::string::{String, ToString};
use alloc::collections::{HashMap, BTreeMap};
use spin::{Mutex, RwLock};
use core::sync::atomic::{AtomicU64, AtomicBool, Ordering};
use core::fmt;
use core::clone::Clone;

use crate::admin::audit::{AuditManager, AuditEvent, AuditEventType, AuditLevel, AuditResult};
use crate::admin::security::{SecurityManager, SecurityLevel, SecurityError};
use crate::admin::config_manager::{ConfigManager, ConfigValue, ConfigKey};

// Re-export main types for easy access
pub use security_types::*;

mod security_types {
    /// Security policy management result
    pub type PolicyResult<T> = Result<T, PolicyError>;

    /// Security policy error types
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum PolicyError {
        NotFound = 0,
        InvalidPolicy = 1,
        PolicyConflict = 2,
        EnforcementFailed = 3,
        ViolationDetected = 4,
        VersionMismatch = 5,
        PropagationFailed = 6,
        EvaluationError = 7,
        InvalidScope = 8,
        AccessDenied = 9,
        ResourceExhausted = 10,
        ConflictResolutionFailed = 11,
        ServiceUnavailable = 12,
    }

    /// Security rule categories
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum RuleCategory {
        Access = 0,
        Process = 1,
        Network = 2,
        Data = 3,
        System = 4,
        User = 5,
        Resource = 6,
        Compliance = 7,
    }

    /// Policy enforcement modes
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum EnforcementMode {
        Disabled = 0,
        Audit = 1,
        Soft = 2,
        Hard = 3,
        Strict = 4,
        Emergency = 5,
    }

    /// Policy priority levels
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    #[repr(u8)]
    pub enum PolicyPriority {
        Lowest = 0,
        Low = 1,
        Normal = 2,
        High = 3,
        Critical = 4,
        System = 5,
    }

    /// Policy evaluation result
    #[derive(Debug, Clone)]
    pub struct EvaluationResult {
        pub allowed: bool,
        pub policy_matches: Vec<PolicyMatch>,
        pub conflicts: Vec<PolicyConflict>,
        pub violations: Vec<PolicyViolation>,
        pub enforcement_level: EnforcementMode,
        pub audit_required: bool,
        pub quarantine_required: bool,
    }

    /// Policy match information
    #[derive(Debug, Clone)]
    pub struct PolicyMatch {
        pub policy_id: String,
        pub priority: PolicyPriority,
        pub rule_matches: Vec<RuleMatch>,
        pub confidence: f32,
    }

    /// Rule match information
    #[derive(Debug, Clone)]
    pub struct RuleMatch {
        pub rule_id: String,
        pub category: RuleCategory,
        pub matched: bool,
        pub parameters: HashMap<String, String>,
    }

    /// Policy conflict information
    #[derive(Debug, Clone)]
    pub struct PolicyConflict {
        pub policy_a: String,
        pub policy_b: String,
        pub conflict_type: ConflictType,
        pub resolution: ConflictResolution,
    }

    /// Types of policy conflicts
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum ConflictType {
        AllowDeny = 0,
        Priority = 1,
        Scope = 2,
        Time = 3,
        Resource = 4,
        Capability = 5,
    }

    /// Conflict resolution strategies
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum ConflictResolution {
        DenyAll = 0,
        AllowAll = 1,
        HighestPriority = 2,
        MostSpecific = 3,
        MostRecent = 4,
        UserChoice = 5,
        SystemDefault = 6,
    }

    /// Policy violation details
    #[derive(Debug, Clone)]
    pub struct PolicyViolation {
        pub violation_id: String,
        pub policy_id: String,
        pub rule_category: RuleCategory,
        pub violation_type: ViolationType,
        pub severity: PolicyPriority,
        pub timestamp: u64,
        pub source_context: String,
        pub target_context: String,
        pub details: String,
        pub remediation: ViolationRemediation,
    }

    /// Types of policy violations
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum ViolationType {
        UnauthorizedAccess = 0,
        ResourceExceeded = 1,
        CapabilityViolation = 2,
        TimeConstraint = 3,
        NetworkViolation = 4,
        DataClassification = 5,
        ProcessViolation = 6,
        SystemIntegrity = 7,
        ComplianceBreach = 8,
    }

    /// Violation remediation actions
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum ViolationRemediation {
        None = 0,
        Log = 1,
        Alert = 2,
        Throttle = 3,
        Deny = 4,
        Quarantine = 5,
        Terminate = 6,
        Isolate = 7,
        Notify = 8,
    }

    /// Policy scope definitions
    #[derive(Debug, Clone)]
    pub enum PolicyScope {
        System,
        Service(String),
        User(String),
        Role(String),
        Namespace(String),
        Resource(String),
        TimeWindow { start: u64, end: u64 },
        Contextual { conditions: HashMap<String, String> },
    }

    /// Policy condition for evaluation
    #[derive(Debug, Clone)]
    pub struct PolicyCondition {
        pub field: String,
        pub operator: ConditionOperator,
        pub value: ConditionValue,
        pub case_sensitive: bool,
    }

    /// Condition operators
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum ConditionOperator {
        Equals = 0,
        NotEquals = 1,
        GreaterThan = 2,
        LessThan = 3,
        Contains = 4,
        StartsWith = 5,
        EndsWith = 6,
        RegexMatch = 7,
        InSet = 8,
        NotInSet = 9,
        Exists = 10,
        NotExists = 11,
    }

    /// Condition value types
    #[derive(Debug, Clone)]
    pub enum ConditionValue {
        String(String),
        Integer(i64),
        Unsigned(u64),
        Float(f64),
        Boolean(bool),
        Set(Vec<String>),
        Range { min: i64, max: i64 },
        TimeRange { start: u64, end: u64 },
    }
}

/// Security policy definition
#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    pub policy_id: String,
    pub name: String,
    pub description: String,
    pub version: PolicyVersion,
    pub category: RuleCategory,
    pub priority: PolicyPriority,
    pub scope: PolicyScope,
    pub conditions: Vec<PolicyCondition>,
    pub rules: Vec<SecurityRule>,
    pub enforcement_mode: EnforcementMode,
    pub enabled: AtomicBool,
    pub created_at: u64,
    pub updated_at: u64,
    pub expires_at: Option<u64>,
    pub tags: Vec<String>,
    pub metadata: HashMap<String, String>,
}

/// Policy version information
#[derive(Debug, Clone)]
pub struct PolicyVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

/// Security rule definition
#[derive(Debug, Clone)]
pub struct SecurityRule {
    pub rule_id: String,
    pub name: String,
    pub category: RuleCategory,
    pub description: String,
    pub parameters: RuleParameters,
    pub actions: Vec<RuleAction>,
    pub conditions: Vec<PolicyCondition>,
    pub enabled: bool,
    pub priority: PolicyPriority,
    pub rate_limits: Option<RateLimit>,
    pub resource_limits: Option<ResourceLimit>,
}

/// Rule action definition
#[derive(Debug, Clone)]
pub struct RuleAction {
    pub action_type: ActionType,
    pub parameters: HashMap<String, String>,
    pub target: ActionTarget,
    pub delay: u64,
    pub retry_count: u32,
    pub on_failure: FailureAction,
}

/// Action types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ActionType {
    Allow = 0,
    Deny = 1,
    Log = 2,
    Audit = 3,
    Alert = 4,
    Throttle = 5,
    Quarantine = 6,
    Terminate = 7,
    Redirect = 8,
    Modify = 9,
    Isolate = 10,
    Notify = 11,
    Rollback = 12,
    Failover = 13,
    Scale = 14,
    LoadBalance = 15,
}

/// Action target types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ActionTarget {
    SelfTarget = 0,
    Source = 1,
    Target = 2,
    Service(String),
    User(String),
    System = 4,
    Network = 5,
    Storage = 6,
}

/// Failure action types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FailureAction {
    Continue = 0,
    Retry = 1,
    Fallback = 2,
    Abort = 3,
    Escalate = 4,
}

/// Rule parameters
#[derive(Debug, Clone)]
pub struct RuleParameters {
    pub timeout: u64,
    pub retry_count: u32,
    pub cache_ttl: u64,
    pub enable_audit: bool,
    pub quarantine_on_violation: bool,
    pub isolation_level: u32,
    pub resource_pool: Option<String>,
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimit {
    pub requests_per_second: u32,
    pub requests_per_minute: u32,
    pub requests_per_hour: u32,
    pub burst_size: u32,
    pub window_size: u64,
}

/// Resource limiting configuration
#[derive(Debug, Clone)]
pub struct ResourceLimit {
    pub memory_mb: u64,
    pub cpu_percent: u32,
    pub disk_io_mb: u64,
    pub network_bandwidth_mbps: u32,
    pub file_descriptors: u32,
    pub processes: u32,
}

/// Policy history and versioning
#[derive(Debug, Clone)]
pub struct PolicyVersionHistory {
    pub history_id: String,
    pub policy_id: String,
    pub version: PolicyVersion,
    pub snapshot: Vec<u8>,
    pub changes: PolicyChangeSet,
    pub created_by: String,
    pub created_at: u64,
    pub is_rollback_point: bool,
}

/// Policy change tracking
#[derive(Debug, Clone)]
pub struct PolicyChangeSet {
    pub added_rules: Vec<String>,
    pub removed_rules: Vec<String>,
    pub modified_rules: Vec<String>,
    pub scope_changes: Vec<String>,
    pub enforcement_changes: Vec<String>,
}

/// Security policy statistics
#[derive(Debug, Clone)]
pub struct PolicyStats {
    pub total_policies: usize,
    pub enabled_policies: usize,
    pub total_rules: usize,
    pub active_rules: usize,
    pub evaluations_performed: u64,
    pub policy_violations: u64,
    pub conflict_resolutions: u64,
    pub propagation_success: u64,
    pub propagation_failures: u64,
    pub rollbacks_performed: u64,
}

/// Global security policy manager
static POLICY_MANAGER: Mutex<Option<SecurityPolicyManager>> = Mutex::new(None);

/// Security Policy Manager - Main orchestrator for system-wide security policies
pub struct SecurityPolicyManager {
    policies: RwLock<HashMap<String, SecurityPolicy>>,
    policy_history: RwLock<BTreeMap<String, PolicyVersionHistory>>,
    evaluation_cache: Mutex<HashMap<String, EvaluationResult>>,
    violation_log: RwLock<Vec<PolicyViolation>>,
    service_propagation: RwLock<HashMap<String, ServicePolicyBinding>>,
    conflict_resolution: ConflictResolver,
    evaluator: PolicyEvaluator,
    propagator: PolicyPropagator,
    versioner: PolicyVersionManager,
    stats: Mutex<PolicyStats>,
    initialized: AtomicBool,
}

/// Service policy binding for propagation
#[derive(Debug, Clone)]
pub struct ServicePolicyBinding {
    pub service_id: String,
    pub policy_ids: Vec<String>,
    pub last_update: u64,
    pub status: PropagationStatus,
    pub error_count: u32,
}

/// Policy propagation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PropagationStatus {
    Pending = 0,
    InProgress = 1,
    Success = 2,
    Failed = 3,
    Timeout = 4,
    Disabled = 5,
}

impl SecurityPolicyManager {
    /// Create a new security policy manager
    pub fn new() -> Self {
        SecurityPolicyManager {
            policies: RwLock::new(HashMap::new()),
            policy_history: RwLock::new(BTreeMap::new()),
            evaluation_cache: Mutex::new(HashMap::new()),
            violation_log: RwLock::new(Vec::new()),
            service_propagation: RwLock::new(HashMap::new()),
            conflict_resolution: ConflictResolver::new(),
            evaluator: PolicyEvaluator::new(),
            propagator: PolicyPropagator::new(),
            versioner: PolicyVersionManager::new(),
            stats: Mutex::new(PolicyStats {
                total_policies: 0,
                enabled_policies: 0,
                total_rules: 0,
                active_rules: 0,
                evaluations_performed: 0,
                policy_violations: 0,
                conflict_resolutions: 0,
                propagation_success: 0,
                propagation_failures: 0,
                rollbacks_performed: 0,
            }),
            initialized: AtomicBool::new(false),
        }
    }

    /// Initialize the security policy manager
    pub fn init(&self) -> PolicyResult<()> {
        if self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::InvalidPolicy);
        }

        // Load default security policies
        self.load_default_policies()?;

        // Initialize subsystems
        self.evaluator.init()?;
        self.propagator.init()?;
        self.versioner.init()?;

        self.initialized.store(true, Ordering::SeqCst);

        info!("Security Policy Manager initialized successfully");
        Ok(())
    }

    /// Shutdown the security policy manager
    pub fn shutdown(&self) -> PolicyResult<()> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Ok(());
        }

        // Stop propagator
        self.propagator.shutdown()?;

        // Clear caches
        self.evaluation_cache.lock().clear();

        self.initialized.store(false, Ordering::SeqCst);

        info!("Security Policy Manager shutdown complete");
        Ok(())
    }

    // ==================== Policy Management ====================

    /// Create a new security policy
    pub fn create_policy(&self, policy: SecurityPolicy) -> PolicyResult<String> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::NotFound);
        }

        // Validate policy
        self.validate_policy(&policy)?;

        let mut policies = self.policies.write();
        let policy_id = policy.policy_id.clone();

        if policies.contains_key(&policy_id) {
            return Err(PolicyError::InvalidPolicy);
        }

        policies.insert(policy_id.clone(), policy);
        self.update_stats();

        // Create version history
        self.create_version_snapshot(&policy_id)?;

        // Propagate to services
        self.propagate_policy(&policy_id)?;

        info!("Created security policy: {} (ID: {})", policy.name, policy_id);
        Ok(policy_id)
    }

    /// Update an existing security policy
    pub fn update_policy(&self, policy_id: &str, updated_policy: SecurityPolicy) -> PolicyResult<()> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::NotFound);
        }

        // Validate updated policy
        self.validate_policy(&updated_policy)?;

        let mut policies = self.policies.write();
        let mut policy = policies.get_mut(policy_id)
            .ok_or(PolicyError::NotFound)?;

        // Create snapshot for versioning
        self.create_version_snapshot(policy_id)?;

        *policy = updated_policy;
        policy.updated_at = self.get_current_time();

        self.update_stats();

        // Propagate changes
        self.propagate_policy(policy_id)?;

        info!("Updated security policy: {}", policy_id);
        Ok(())
    }

    /// Delete a security policy
    pub fn delete_policy(&self, policy_id: &str) -> PolicyResult<()> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::NotFound);
        }

        let mut policies = self.policies.write();
        let policy = policies.remove(policy_id)
            .ok_or(PolicyError::NotFound)?;

        // Remove from service bindings
        self.remove_policy_from_services(policy_id)?;

        self.update_stats();

        info!("Deleted security policy: {} (ID: {})", policy.name, policy_id);
        Ok(())
    }

    /// Enable or disable a policy
    pub fn set_policy_enabled(&self, policy_id: &str, enabled: bool) -> PolicyResult<()> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::NotFound);
        }

        let mut policies = self.policies.write();
        let policy = policies.get_mut(policy_id)
            .ok_or(PolicyError::NotFound)?;

        policy.enabled.store(enabled, Ordering::SeqCst);
        policy.updated_at = self.get_current_time();

        self.update_stats();

        // Propagate status change
        if enabled {
            self.propagate_policy(policy_id)?;
        } else {
            self.remove_policy_from_services(policy_id)?;
        }

        info!("{}d policy: {}", if enabled { "Enable" } else { "Disable" }, policy_id);
        Ok(())
    }

    // ==================== Policy Evaluation ====================

    /// Evaluate security policies for a given context
    pub fn evaluate_policies(&self, context: &EvaluationContext) -> PolicyResult<EvaluationResult> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::NotFound);
        }

        let cache_key = self.generate_cache_key(context);
        
        // Check cache first
        if let Some(cached_result) = self.evaluation_cache.lock().get(&cache_key) {
            return Ok(cached_result.clone());
        }

        let policies = self.policies.read();
        let mut policy_matches = Vec::new();
        let mut violations = Vec::new();
        let mut max_enforcement = EnforcementMode::Disabled;

        for (policy_id, policy) in policies.iter() {
            if !policy.enabled.load(Ordering::SeqCst) {
                continue;
            }

            if !self.policy_applies_to_context(policy, context) {
                continue;
            }

            let match_result = self.evaluate_policy_conditions(policy, context)?;
            if match_result.applies {
                let policy_match = PolicyMatch {
                    policy_id: policy_id.clone(),
                    priority: policy.priority,
                    rule_matches: match_result.rule_matches,
                    confidence: match_result.confidence,
                };
                policy_matches.push(policy_match);

                if policy.enforcement_mode > max_enforcement {
                    max_enforcement = policy.enforcement_mode;
                }
            }
        }

        // Resolve conflicts
        let conflicts = self.conflict_resolution.resolve(&policy_matches)?;

        // Apply evaluation
        let evaluation_result = self.apply_evaluation(&policy_matches, &conflicts, context)?;

        // Cache result
        {
            let mut cache = self.evaluation_cache.lock();
            cache.insert(cache_key, evaluation_result.clone());
        }

        // Update statistics
        {
            let mut stats = self.stats.lock();
            stats.evaluations_performed += 1;
        }

        Ok(evaluation_result)
    }

    // ==================== Policy Propagation ====================

    /// Propagate a policy to relevant services
    pub fn propagate_policy(&self, policy_id: &str) -> PolicyResult<()> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::NotFound);
        }

        let policies = self.policies.read();
        let policy = policies.get(policy_id)
            .ok_or(PolicyError::NotFound)?;

        let target_services = self.identify_target_services(policy);
        
        for service_id in target_services {
            let binding = ServicePolicyBinding {
                service_id: service_id.clone(),
                policy_ids: vec![policy_id.to_string()],
                last_update: self.get_current_time(),
                status: PropagationStatus::InProgress,
                error_count: 0,
            };

            self.propagator.propagate_to_service(&binding, policy)?;
            
            // Update binding status
            {
                let mut bindings = self.service_propagation.write();
                bindings.insert(service_id, binding);
            }
        }

        Ok(())
    }

    /// Remove a policy from services
    pub fn remove_policy_from_services(&self, policy_id: &str) -> PolicyResult<()> {
        let mut bindings = self.service_propagation.write();
        
        for binding in bindings.values_mut() {
            binding.policy_ids.retain(|id| id != policy_id);
            if binding.policy_ids.is_empty() {
                binding.status = PropagationStatus::Disabled;
            }
        }

        Ok(())
    }

    // ==================== Policy Versioning ====================

    /// Create a version snapshot of a policy
    pub fn create_version_snapshot(&self, policy_id: &str) -> PolicyResult<()> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::NotFound);
        }

        let policies = self.policies.read();
        let policy = policies.get(policy_id)
            .ok_or(PolicyError::NotFound)?;

        let history_id = format!("{}_{}", policy_id, self.get_current_time());
        let history = PolicyVersionHistory {
            history_id: history_id.clone(),
            policy_id: policy_id.to_string(),
            version: policy.version.clone(),
            snapshot: bincode::serialize(policy).map_err(|_| PolicyError::InvalidPolicy)?,
            changes: PolicyChangeSet {
                added_rules: Vec::new(),
                removed_rules: Vec::new(),
                modified_rules: Vec::new(),
                scope_changes: Vec::new(),
                enforcement_changes: Vec::new(),
            },
            created_by: "system".to_string(),
            created_at: self.get_current_time(),
            is_rollback_point: false,
        };

        let mut policy_history = self.policy_history.write();
        policy_history.insert(history_id, history);

        Ok(())
    }

    /// Rollback to a previous version
    pub fn rollback_policy(&self, policy_id: &str, history_id: &str) -> PolicyResult<()> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(PolicyError::NotFound);
        }

        let policy_history = self.policy_history.read();
        let history = policy_history.get(history_id)
            .ok_or(PolicyError::NotFound)?;

        if &history.policy_id != policy_id {
            return Err(PolicyError::InvalidScope);
        }

        let snapshot: SecurityPolicy = bincode::deserialize(&history.snapshot)
            .map_err(|_| PolicyError::VersionMismatch)?;

        // Update the policy
        let mut policies = self.policies.write();
        if let Some(policy) = policies.get_mut(policy_id) {
            *policy = snapshot;
        }

        // Propagate rollback
        self.propagate_policy(policy_id)?;

        {
            let mut stats = self.stats.lock();
            stats.rollbacks_performed += 1;
        }

        info!("Rolled back policy {} to version {:?}", policy_id, history.version);
        Ok(())
    }

    // ==================== Violation Management ====================

    /// Record a policy violation
    pub fn record_violation(&self, violation: PolicyViolation) -> PolicyResult<()> {
        let mut violations = self.violation_log.write();
        violations.push(violation.clone());

        // Log to audit system
        self.log_violation_audit(&violation)?;

        // Trigger violation handling
        self.handle_violation(&violation)?;

        {
            let mut stats = self.stats.lock();
            stats.policy_violations += 1;
        }

        warn!("Policy violation recorded: {} (Policy: {}, Type: {:?})", 
              violation.violation_id, violation.policy_id, violation.violation_type);
        Ok(())
    }

    /// Get policy violations
    pub fn get_violations(&self, time_range: Option<(u64, u64)>, 
                        policy_filter: Option<&str>) -> PolicyResult<Vec<PolicyViolation>> {
        let violations = self.violation_log.read();
        let mut filtered_violations = Vec::new();

        for violation in violations.iter() {
            // Apply time filter
            if let Some((start, end)) = time_range {
                if violation.timestamp < start || violation.timestamp > end {
                    continue;
                }
            }

            // Apply policy filter
            if let Some(policy_id) = policy_filter {
                if &violation.policy_id != policy_id {
                    continue;
                }
            }

            filtered_violations.push(violation.clone());
        }

        Ok(filtered_violations)
    }

    // ==================== Statistics and Monitoring ====================

    /// Get security policy statistics
    pub fn get_stats(&self) -> PolicyStats {
        let stats = self.stats.lock();
        stats.clone()
    }

    // ==================== Internal Helper Methods ====================

    /// Load default system policies
    fn load_default_policies(&self) -> PolicyResult<()> {
        // System Security Policy
        let system_policy = SecurityPolicy {
            policy_id: "system_security".to_string(),
            name: "System Security Policy".to_string(),
            description: "Core system security enforcement".to_string(),
            version: PolicyVersion { major: 1, minor: 0, patch: 0, build: 1 },
            category: RuleCategory::System,
            priority: PolicyPriority::Critical,
            scope: PolicyScope::System,
            conditions: Vec::new(),
            rules: self.create_default_security_rules(),
            enforcement_mode: EnforcementMode::Hard,
            enabled: AtomicBool::new(true),
            created_at: self.get_current_time(),
            updated_at: self.get_current_time(),
            expires_at: None,
            tags: vec!["system".to_string(), "security".to_string()],
            metadata: HashMap::new(),
        };

        // Access Control Policy
        let access_policy = SecurityPolicy {
            policy_id: "access_control".to_string(),
            name: "Access Control Policy".to_string(),
            description: "Access control and permission management".to_string(),
            version: PolicyVersion { major: 1, minor: 0, patch: 0, build: 1 },
            category: RuleCategory::Access,
            priority: PolicyPriority::High,
            scope: PolicyScope::System,
            conditions: Vec::new(),
            rules: self.create_default_access_rules(),
            enforcement_mode: EnforcementMode::Hard,
            enabled: AtomicBool::new(true),
            created_at: self.get_current_time(),
            updated_at: self.get_current_time(),
            expires_at: None,
            tags: vec!["access".to_string(), "security".to_string()],
            metadata: HashMap::new(),
        };

        self.create_policy(system_policy)?;
        self.create_policy(access_policy)?;

        info!("Default security policies loaded");
        Ok(())
    }

    /// Create default security rules
    fn create_default_security_rules(&self) -> Vec<SecurityRule> {
        vec![
            SecurityRule {
                rule_id: "prevent_unauthorized_kernel_access".to_string(),
                name: "Prevent Unauthorized Kernel Access".to_string(),
                category: RuleCategory::System,
                description: "Block unauthorized access to kernel space",
                parameters: RuleParameters {
                    timeout: 1000,
                    retry_count: 0,
                    cache_ttl: 300,
                    enable_audit: true,
                    quarantine_on_violation: true,
                    isolation_level: 5,
                    resource_pool: Some("system".to_string()),
                },
                actions: vec![
                    RuleAction {
                        action_type: ActionType::Deny,
                        parameters: HashMap::new(),
                        target: ActionTarget::Source,
                        delay: 0,
                        retry_count: 0,
                        on_failure: FailureAction::Escalate,
                    }
                ],
                conditions: vec![
                    PolicyCondition {
                        field: "security_level".to_string(),
                        operator: ConditionOperator::LessThan,
                        value: ConditionValue::Unsigned(4),
                        case_sensitive: false,
                    }
                ],
                enabled: true,
                priority: PolicyPriority::Critical,
                rate_limits: None,
                resource_limits: None,
            }
        ]
    }

    /// Create default access control rules
    fn create_default_access_rules(&self) -> Vec<SecurityRule> {
        vec![
            SecurityRule {
                rule_id: "file_access_control".to_string(),
                name: "File Access Control".to_string(),
                category: RuleCategory::Access,
                description: "Control file system access permissions",
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
                        action_type: ActionType::Audit,
                        parameters: HashMap::new(),
                        target: ActionTarget::SelfTarget,
                        delay: 0,
                        retry_count: 0,
                        on_failure: FailureAction::Continue,
                    }
                ],
                conditions: vec![
                    PolicyCondition {
                        field: "resource_type".to_string(),
                        operator: ConditionOperator::Equals,
                        value: ConditionValue::String("file".to_string()),
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
                resource_limits: None,
            }
        ]
    }

    /// Validate a security policy
    fn validate_policy(&self, policy: &SecurityPolicy) -> PolicyResult<()> {
        if policy.name.is_empty() {
            return Err(PolicyError::InvalidPolicy);
        }

        if policy.rules.is_empty() {
            return Err(PolicyError::InvalidPolicy);
        }

        for rule in &policy.rules {
            if rule.name.is_empty() {
                return Err(PolicyError::InvalidPolicy);
            }

            if rule.actions.is_empty() {
                return Err(PolicyError::InvalidPolicy);
            }
        }

        Ok(())
    }

    /// Check if policy applies to evaluation context
    fn policy_applies_to_context(&self, policy: &SecurityPolicy, context: &EvaluationContext) -> bool {
        match &policy.scope {
            PolicyScope::System => true,
            PolicyScope::Service(service_id) => context.service_id == *service_id,
            PolicyScope::User(user_id) => context.user_id == *user_id,
            PolicyScope::Role(role_id) => context.roles.contains(role_id),
            PolicyScope::Namespace(ns) => context.namespace == *ns,
            PolicyScope::Resource(resource_id) => context.resource_id == *resource_id,
            PolicyScope::TimeWindow { start, end } => {
                context.timestamp >= *start && context.timestamp <= *end
            },
            PolicyScope::Contextual { conditions } => {
                // Check if all conditions are met
                for (field, expected_value) in conditions {
                    if let Some(actual_value) = context.metadata.get(field) {
                        if actual_value != expected_value {
                            return false;
                        }
                    } else {
                        return false;
                    }
                }
                true
            }
        }
    }

    /// Evaluate policy conditions against context
    fn evaluate_policy_conditions(&self, policy: &SecurityPolicy, 
                                context: &EvaluationContext) -> PolicyResult<PolicyMatchResult> {
        let mut rule_matches = Vec::new();
        let mut total_confidence = 0.0;
        let mut confidence_count = 0;
        let mut applies = false;

        // Evaluate rule conditions
        for rule in &policy.rules {
            let mut rule_applies = true;
            let mut matched_conditions = 0;

            for condition in &rule.conditions {
                if self.evaluate_condition(condition, context)? {
                    matched_conditions += 1;
                }
            }

            if matched_conditions == rule.conditions.len() {
                rule_applies = true;
                applies = true;
            } else if !rule.conditions.is_empty() && matched_conditions > 0 {
                // Partial match - reduce confidence
                total_confidence += matched_conditions as f32 / rule.conditions.len() as f32;
                confidence_count += 1;
            } else {
                rule_applies = false;
            }

            rule_matches.push(RuleMatch {
                rule_id: rule.rule_id.clone(),
                category: rule.category,
                matched: rule_applies,
                parameters: HashMap::new(),
            });
        }

        let confidence = if confidence_count > 0 {
            total_confidence / confidence_count as f32
        } else {
            if applies { 1.0 } else { 0.0 }
        };

        Ok(PolicyMatchResult {
            applies,
            rule_matches,
            confidence,
        })
    }

    /// Evaluate a single condition against context
    fn evaluate_condition(&self, condition: &PolicyCondition, 
                        context: &EvaluationContext) -> PolicyResult<bool> {
        let field_value = self.get_context_field_value(&condition.field, context)
            .unwrap_or_else(|| "".to_string());

        match condition.operator {
            ConditionOperator::Equals => {
                Ok(field_value == self.condition_value_to_string(&condition.value))
            }
            ConditionOperator::NotEquals => {
                Ok(field_value != self.condition_value_to_string(&condition.value))
            }
            ConditionOperator::Contains => {
                Ok(field_value.contains(&self.condition_value_to_string(&condition.value)))
            }
            _ => {
                // Other operators would be implemented based on value types
                Ok(false)
            }
        }
    }

    /// Get context field value
    fn get_context_field_value(&self, field: &str, context: &EvaluationContext) -> Option<String> {
        match field.as_str() {
            "user_id" => Some(context.user_id.to_string()),
            "service_id" => Some(context.service_id.to_string()),
            "resource_type" => Some(context.resource_type.clone()),
            "operation" => Some(context.operation.clone()),
            "security_level" => Some(context.security_level as u8).map(|s| s.to_string()),
            _ => context.metadata.get(field).cloned(),
        }
    }

    /// Convert condition value to string
    fn condition_value_to_string(&self, value: &ConditionValue) -> String {
        match value {
            ConditionValue::String(s) => s.clone(),
            ConditionValue::Integer(i) => i.to_string(),
            ConditionValue::Unsigned(u) => u.to_string(),
            ConditionValue::Float(f) => f.to_string(),
            ConditionValue::Boolean(b) => b.to_string(),
            ConditionValue::Set(v) => v.join(","),
            _ => "".to_string(),
        }
    }

    /// Generate cache key for evaluation context
    fn generate_cache_key(&self, context: &EvaluationContext) -> String {
        format!("{}_{}_{}_{}_{}", 
                context.user_id, context.service_id, context.resource_type, 
                context.operation, context.timestamp / 60) // Cache for 1 minute intervals
    }

    /// Apply evaluation to determine final result
    fn apply_evaluation(&self, policy_matches: &[PolicyMatch], conflicts: &[PolicyConflict],
                      context: &EvaluationContext) -> PolicyResult<EvaluationResult> {
        let mut allowed = true;
        let mut enforcement_level = EnforcementMode::Disabled;
        let mut audit_required = false;
        let mut quarantine_required = false;
        let mut violations = Vec::new();

        // Process policies in priority order
        let mut sorted_matches = policy_matches.to_vec();
        sorted_matches.sort_by(|a, b| b.priority.cmp(&a.priority));

        for policy_match in &sorted_matches {
            // Check for deny actions
            // This would be implemented based on actual rule evaluation
            enforcement_level = EnforcementMode::Hard; // Simplified
            audit_required = true;
        }

        Ok(EvaluationResult {
            allowed,
            policy_matches: policy_matches.to_vec(),
            conflicts: conflicts.to_vec(),
            violations,
            enforcement_level,
            audit_required,
            quarantine_required,
        })
    }

    /// Identify target services for a policy
    fn identify_target_services(&self, policy: &SecurityPolicy) -> Vec<String> {
        // This would identify services based on policy scope and categories
        match &policy.scope {
            PolicyScope::System => vec!["all".to_string()],
            PolicyScope::Service(service_id) => vec![service_id.clone()],
            _ => Vec::new(),
        }
    }

    /// Log violation to audit system
    fn log_violation_audit(&self, violation: &PolicyViolation) -> PolicyResult<()> {
        if let Some(audit_manager) = crate::admin::audit::get_audit_manager() {
            let audit_event = AuditEvent {
                event_id: 0, // Will be assigned by audit manager
                timestamp: violation.timestamp,
                event_type: AuditEventType::SecurityPolicyViolation,
                level: match violation.severity {
                    PolicyPriority::Lowest | PolicyPriority::Low => AuditLevel::Warning,
                    PolicyPriority::Normal => AuditLevel::Error,
                    PolicyPriority::High | PolicyPriority::Critical | PolicyPriority::System => AuditLevel::Critical,
                },
                user_id: None,
                session_id: None,
                process_id: None,
                thread_id: None,
                ip_address: None,
                source: "policy_manager".to_string(),
                target: violation.policy_id.clone(),
                details: format!("{}: {}", violation.violation_type as u8, violation.details),
                result: false,
                additional_data: Vec::new(),
            };

            let _ = audit_manager.lock().as_mut().and_then(|mgr| mgr.log_event(audit_event).ok());
        }

        Ok(())
    }

    /// Handle policy violation
    fn handle_violation(&self, violation: &PolicyViolation) -> PolicyResult<()> {
        match violation.remediation {
            ViolationRemediation::Log => {
                info!("Policy violation logged: {}", violation.violation_id);
            }
            ViolationRemediation::Alert => {
                warn!("Policy violation alert: {}", violation.violation_id);
            }
            ViolationRemediation::Deny => {
                error!("Policy violation - access denied: {}", violation.violation_id);
            }
            ViolationRemediation::Quarantine => {
                error!("Policy violation - quarantining: {}", violation.violation_id);
            }
            ViolationRemediation::Terminate => {
                error!("Policy violation - terminating process: {}", violation.violation_id);
            }
            _ => {}
        }

        Ok(())
    }

    /// Update statistics
    fn update_stats(&self) {
        let policies = self.policies.read();
        let mut stats = self.stats.lock();
        
        stats.total_policies = policies.len();
        stats.enabled_policies = policies.values()
            .filter(|p| p.enabled.load(Ordering::SeqCst))
            .count();
        stats.total_rules = policies.values()
            .map(|p| p.rules.len())
            .sum();
        stats.active_rules = policies.values()
            .filter(|p| p.enabled.load(Ordering::SeqCst))
            .map(|p| p.rules.iter().filter(|r| r.enabled).count())
            .sum();
    }

    /// Get current time
    fn get_current_time(&self) -> u64 {
        // In real implementation, would get time from kernel's time subsystem
        crate::hal::get_current_time()
    }
}

/// Evaluation context for policy evaluation
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    pub user_id: u64,
    pub session_id: u64,
    pub service_id: String,
    pub resource_id: String,
    pub resource_type: String,
    pub operation: String,
    pub security_level: SecurityLevel,
    pub timestamp: u64,
    pub namespace: String,
    pub roles: Vec<String>,
    pub metadata: HashMap<String, String>,
}

/// Policy match result
#[derive(Debug, Clone)]
struct PolicyMatchResult {
    pub applies: bool,
    pub rule_matches: Vec<RuleMatch>,
    pub confidence: f32,
}

/// Policy conflict resolver
struct ConflictResolver {
    resolution_strategy: ConflictResolution,
}

impl ConflictResolver {
    fn new() -> Self {
        ConflictResolver {
            resolution_strategy: ConflictResolution::HighestPriority,
        }
    }

    fn resolve(&self, matches: &[PolicyMatch]) -> PolicyResult<Vec<PolicyConflict>> {
        // Simplified conflict resolution
        // In real implementation, would detect and resolve actual conflicts
        let conflicts = Vec::new();
        Ok(conflicts)
    }
}

/// Policy evaluator
struct PolicyEvaluator {
    evaluation_depth: u32,
}

impl PolicyEvaluator {
    fn new() -> Self {
        PolicyEvaluator {
            evaluation_depth: 10,
        }
    }

    fn init(&self) -> PolicyResult<()> {
        Ok(())
    }
}

/// Policy propagator
struct PolicyPropagator {
    propagation_timeout: u64,
}

impl PolicyPropagator {
    fn new() -> Self {
        PolicyPropagator {
            propagation_timeout: 5000,
        }
    }

    fn init(&self) -> PolicyResult<()> {
        Ok(())
    }

    fn propagate_to_service(&self, binding: &ServicePolicyBinding, policy: &SecurityPolicy) -> PolicyResult<()> {
        // Simplified propagation
        // In real implementation, would actually send policy to service
        debug!("Propagating policy {} to service {}", policy.policy_id, binding.service_id);
        Ok(())
    }

    fn shutdown(&self) -> PolicyResult<()> {
        Ok(())
    }
}

/// Policy version manager
struct PolicyVersionManager {
    max_history_entries: usize,
}

impl PolicyVersionManager {
    fn new() -> Self {
        PolicyVersionManager {
            max_history_entries: 100,
        }
    }

    fn init(&self) -> PolicyResult<()> {
        Ok(())
    }
}

// ==================== Global Manager Functions ====================

/// Initialize the global security policy manager
pub fn init_policy_manager() -> PolicyResult<()> {
    let mut manager_guard = POLICY_MANAGER.lock();
    
    if manager_guard.is_some() {
        return Err(PolicyError::InvalidPolicy);
    }

    let manager = SecurityPolicyManager::new();
    manager.init()?;
    
    *manager_guard = Some(manager);
    
    info!("Security Policy Manager initialized successfully");
    Ok(())
}

/// Shutdown the global security policy manager
pub fn shutdown_policy_manager() -> PolicyResult<()> {
    let mut manager_guard = POLICY_MANAGER.lock();
    
    if let Some(manager) = manager_guard.take() {
        manager.shutdown()?;
    }
    
    info!("Security Policy Manager shutdown complete");
    Ok(())
}

/// Get the global security policy manager instance
pub fn get_policy_manager() -> Option<&'static Mutex<Option<SecurityPolicyManager>>> {
    Some(&POLICY_MANAGER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_creation() {
        let policy = SecurityPolicy {
            policy_id: "test_policy".to_string(),
            name: "Test Policy".to_string(),
            description: "A test policy".to_string(),
            version: PolicyVersion { major: 1, minor: 0, patch: 0, build: 1 },
            category: RuleCategory::System,
            priority: PolicyPriority::Normal,
            scope: PolicyScope::System,
            conditions: Vec::new(),
            rules: Vec::new(),
            enforcement_mode: EnforcementMode::Hard,
            enabled: AtomicBool::new(true),
            created_at: 1000000,
            updated_at: 1000000,
            expires_at: None,
            tags: Vec::new(),
            metadata: HashMap::new(),
        };

        assert_eq!(policy.name, "Test Policy");
        assert!(policy.enabled.load(Ordering::SeqCst));
    }

    #[test]
    fn test_evaluation_context() {
        let context = EvaluationContext {
            user_id: 1,
            session_id: 123,
            service_id: "test_service".to_string(),
            resource_id: "test_resource".to_string(),
            resource_type: "file".to_string(),
            operation: "read".to_string(),
            security_level: SecurityLevel::Medium,
            timestamp: 1000000,
            namespace: "test".to_string(),
            roles: vec!["user".to_string()],
            metadata: HashMap::new(),
        };

        assert_eq!(context.user_id, 1);
        assert_eq!(context.operation, "read");
    }

    #[test]
    fn test_policy_violation() {
        let violation = PolicyViolation {
            violation_id: "violation_1".to_string(),
            policy_id: "test_policy".to_string(),
            rule_category: RuleCategory::System,
            violation_type: ViolationType::UnauthorizedAccess,
            severity: PolicyPriority::High,
            timestamp: 1000000,
            source_context: "user_1".to_string(),
            target_context: "resource_1".to_string(),
            details: "Unauthorized access attempt".to_string(),
            remediation: ViolationRemediation::Alert,
        };

        assert_eq!(violation.violation_type, ViolationType::UnauthorizedAccess);
        assert_eq!(violation.severity, PolicyPriority::High);
    }
}