//! MultiOS Audit Management Module
//! 
//! This module provides comprehensive audit and monitoring functionality including:
//! - Security event logging and tracking
//! - User activity monitoring
//! - Audit trail management
//! - Compliance reporting
//! - Integration with security and user management systems

#![no_std]
#![feature(alloc)]

use spin::{Mutex, RwLock};
use alloc::vec::Vec;
use alloc::string::{String, ToString};
use alloc::collections::VecDeque;

/// Audit management result
pub type AuditResult<T> = Result<T, AuditError>;

/// Audit error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AuditError {
    LogNotFound = 0,
    InvalidEvent = 1,
    StorageExhausted = 2,
    PermissionDenied = 3,
    NotInitialized = 4,
    ConfigurationError = 5,
    QueryFailed = 6,
    ExportFailed = 7,
}

/// Audit event severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AuditLevel {
    Info = 0,
    Warning = 1,
    Error = 2,
    Critical = 3,
    Security = 4,
}

/// Audit event types
#[derive(Debug, Clone)]
pub enum AuditEventType {
    UserAuthentication,
    UserLogout,
    UserCreated,
    UserModified,
    UserDeleted,
    UserLocked,
    UserUnlocked,
    PasswordChanged,
    PasswordReset,
    PermissionGranted,
    PermissionRevoked,
    AccessDenied,
    SecurityViolation,
    SystemStart,
    SystemStop,
    ConfigurationChanged,
    FileAccessed,
    FileModified,
    FileDeleted,
    NetworkConnection,
    NetworkDisconnection,
    ProcessCreated,
    ProcessTerminated,
    KernelCall,
    SecurityPolicyViolation,
    MultiFactorAuth,
}

/// Complete audit event structure
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub event_id: u64,
    pub timestamp: u64,
    pub event_type: AuditEventType,
    pub level: AuditLevel,
    pub user_id: Option<crate::admin::user_manager::UserId>,
    pub session_id: Option<u64>,
    pub process_id: Option<u32>,
    pub thread_id: Option<u32>,
    pub ip_address: Option<String>,
    pub source: String,
    pub target: String,
    pub details: String,
    pub result: bool,
    pub additional_data: Vec<(String, String)>,
}

/// Audit log configuration
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub enabled: bool,
    pub max_log_size: usize,
    pub retention_days: u32,
    pub compression_enabled: bool,
    pub remote_logging: bool,
    pub remote_server: Option<String>,
    pub real_time_monitoring: bool,
    pub alert_thresholds: AlertThresholds,
}

/// Alert thresholds for real-time monitoring
#[derive(Debug, Clone)]
pub struct AlertThresholds {
    pub failed_logins_per_minute: u32,
    pub security_violations_per_hour: u32,
    pub admin_actions_per_hour: u32,
    pub file_access_per_minute: u32,
}

/// Audit query parameters
#[derive(Debug, Clone)]
pub struct AuditQuery {
    pub event_types: Vec<AuditEventType>,
    pub user_ids: Vec<crate::admin::user_manager::UserId>,
    pub time_range: Option<(u64, u64)>,
    pub level_filter: Option<AuditLevel>,
    pub source_filter: Option<String>,
    pub target_filter: Option<String>,
    pub result_filter: Option<bool>,
    pub limit: Option<usize>,
}

/// Audit statistics
#[derive(Debug, Clone)]
pub struct AuditStats {
    pub total_events: u64,
    pub events_today: u64,
    pub security_events: u64,
    pub user_events: u64,
    pub system_events: u64,
    pub failed_events: u64,
    pub log_size_bytes: usize,
    pub queries_executed: u64,
    pub alerts_triggered: u64,
    pub storage_used_percent: f32,
}

/// Real-time alert information
#[derive(Debug, Clone)]
pub struct AuditAlert {
    pub alert_id: u64,
    pub timestamp: u64,
    pub level: AuditLevel,
    pub message: String,
    pub source_event: Option<AuditEvent>,
    pub triggered_by: String,
}

/// Audit report structure
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub report_id: u64,
    pub generated_at: u64,
    pub time_range: (u64, u64),
    pub query_parameters: AuditQuery,
    pub events: Vec<AuditEvent>,
    pub statistics: AuditStats,
    pub summary: ReportSummary,
}

/// Summary information for audit reports
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub total_events: usize,
    pub security_incidents: usize,
    pub user_activities: usize,
    pub system_activities: usize,
    pub compliance_status: String,
    pub recommendations: Vec<String>,
}

/// Global audit manager instance
static AUDIT_MANAGER: Mutex<Option<AuditManager>> = Mutex::new(None);

/// Audit Manager - Main orchestrator for audit operations
pub struct AuditManager {
    events: RwLock<VecDeque<AuditEvent>>,
    config: Mutex<AuditConfig>,
    stats: Mutex<AuditStats>,
    alerts: RwLock<VecDeque<AuditAlert>>,
    next_event_id: Mutex<u64>,
    next_alert_id: Mutex<u64>,
    initialized: bool,
}

impl AuditManager {
    /// Create a new Audit Manager instance
    pub fn new() -> Self {
        Self {
            events: RwLock::new(VecDeque::new()),
            config: Mutex::new(AuditConfig {
                enabled: true,
                max_log_size: 10000, // Maximum events to keep in memory
                retention_days: 30,
                compression_enabled: false,
                remote_logging: false,
                remote_server: None,
                real_time_monitoring: true,
                alert_thresholds: AlertThresholds {
                    failed_logins_per_minute: 10,
                    security_violations_per_hour: 5,
                    admin_actions_per_hour: 20,
                    file_access_per_minute: 100,
                },
            }),
            stats: Mutex::new(AuditStats {
                total_events: 0,
                events_today: 0,
                security_events: 0,
                user_events: 0,
                system_events: 0,
                failed_events: 0,
                log_size_bytes: 0,
                queries_executed: 0,
                alerts_triggered: 0,
                storage_used_percent: 0.0,
            }),
            alerts: RwLock::new(VecDeque::new()),
            next_event_id: Mutex::new(1),
            next_alert_id: Mutex::new(1),
            initialized: false,
        }
    }

    /// Initialize the audit manager
    pub fn init(&mut self) -> AuditResult<()> {
        if self.initialized {
            return Err(AuditError::NotInitialized);
        }

        // Initialize with bootstrap audit event
        let bootstrap_event = AuditEvent {
            event_id: self.get_next_event_id(),
            timestamp: self.get_current_time(),
            event_type: AuditEventType::SystemStart,
            level: AuditLevel::Info,
            user_id: None,
            session_id: None,
            process_id: None,
            thread_id: None,
            ip_address: None,
            source: "audit_manager".to_string(),
            target: "system".to_string(),
            details: "Audit Manager initialized".to_string(),
            result: true,
            additional_data: Vec::new(),
        };

        self.log_event_internal(bootstrap_event)?;

        self.initialized = true;
        
        info!("Audit Manager initialized successfully");
        Ok(())
    }

    /// Shutdown the audit manager
    pub fn shutdown(&mut self) -> AuditResult<()> {
        if !self.initialized {
            return Err(AuditError::NotInitialized);
        }

        // Log shutdown event
        let shutdown_event = AuditEvent {
            event_id: self.get_next_event_id(),
            timestamp: self.get_current_time(),
            event_type: AuditEventType::SystemStop,
            level: AuditLevel::Info,
            user_id: None,
            session_id: None,
            process_id: None,
            thread_id: None,
            ip_address: None,
            source: "audit_manager".to_string(),
            target: "system".to_string(),
            details: "Audit Manager shutting down".to_string(),
            result: true,
            additional_data: Vec::new(),
        };

        self.log_event_internal(shutdown_event)?;

        self.initialized = false;
        info!("Audit Manager shutdown complete");
        Ok(())
    }

    // ==================== Event Logging Operations ====================

    /// Log an audit event
    pub fn log_event(&self, event: AuditEvent) -> AuditResult<()> {
        if !self.initialized {
            return Err(AuditError::NotInitialized);
        }

        self.log_event_internal(event)?;
        Ok(())
    }

    /// Log user authentication event
    pub fn log_authentication(&self, user_id: Option<crate::admin::user_manager::UserId>,
                            session_id: Option<u64>, username: &str,
                            success: bool, ip_address: Option<&str>) -> AuditResult<()> {
        let event = AuditEvent {
            event_id: self.get_next_event_id(),
            timestamp: self.get_current_time(),
            event_type: if success { AuditEventType::UserAuthentication } else { AuditEventType::SecurityViolation },
            level: if success { AuditLevel::Info } else { AuditLevel::Warning },
            user_id,
            session_id,
            process_id: None,
            thread_id: None,
            ip_address: ip_address.map(|ip| ip.to_string()),
            source: "authentication".to_string(),
            target: username.to_string(),
            details: if success { "User logged in successfully".to_string() } else { "Authentication failed".to_string() },
            result: success,
            additional_data: Vec::new(),
        };

        self.log_event(event)?;
        Ok(())
    }

    /// Log user action event
    pub fn log_user_action(&self, user_id: crate::admin::user_manager::UserId,
                          action: &str, target: &str, success: bool) -> AuditResult<()> {
        let event = AuditEvent {
            event_id: self.get_next_event_id(),
            timestamp: self.get_current_time(),
            event_type: AuditEventType::UserModified,
            level: if success { AuditLevel::Info } else { AuditLevel::Warning },
            user_id: Some(user_id),
            session_id: None,
            process_id: None,
            thread_id: None,
            ip_address: None,
            source: "user_action".to_string(),
            target: target.to_string(),
            details: action.to_string(),
            result: success,
            additional_data: Vec::new(),
        };

        self.log_event(event)?;
        Ok(())
    }

    /// Log security violation event
    pub fn log_security_violation(&self, user_id: Option<crate::admin::user_manager::UserId>,
                                session_id: Option<u64>, violation_type: &str,
                                details: &str) -> AuditResult<()> {
        let event = AuditEvent {
            event_id: self.get_next_event_id(),
            timestamp: self.get_current_time(),
            event_type: AuditEventType::SecurityViolation,
            level: AuditLevel::Critical,
            user_id,
            session_id,
            process_id: None,
            thread_id: None,
            ip_address: None,
            source: "security".to_string(),
            target: violation_type.to_string(),
            details: details.to_string(),
            result: false,
            additional_data: Vec::new(),
        };

        self.log_event(event)?;
        Ok(())
    }

    /// Log file access event
    pub fn log_file_access(&self, user_id: Option<crate::admin::user_manager::UserId>,
                         file_path: &str, operation: &str, success: bool) -> AuditResult<()> {
        let event = AuditEvent {
            event_id: self.get_next_event_id(),
            timestamp: self.get_current_time(),
            event_type: AuditEventType::FileAccessed,
            level: AuditLevel::Info,
            user_id,
            session_id: None,
            process_id: None,
            thread_id: None,
            ip_address: None,
            source: "file_system".to_string(),
            target: file_path.to_string(),
            details: operation.to_string(),
            result: success,
            additional_data: Vec::new(),
        };

        self.log_event(event)?;
        Ok(())
    }

    // ==================== Event Query and Retrieval ====================

    /// Query audit events based on parameters
    pub fn query_events(&self, query: &AuditQuery) -> AuditResult<Vec<AuditEvent>> {
        let mut events = self.events.read();
        let mut filtered_events: Vec<AuditEvent> = Vec::new();

        // Apply filters
        for event in events.iter() {
            if !query.event_types.is_empty() && !query.event_types.contains(&event.event_type) {
                continue;
            }

            if !query.user_ids.is_empty() && event.user_id.is_none() {
                continue;
            }

            if let Some(user_id) = event.user_id {
                if !query.user_ids.is_empty() && !query.user_ids.contains(&user_id) {
                    continue;
                }
            }

            if let Some((start_time, end_time)) = query.time_range {
                if event.timestamp < start_time || event.timestamp > end_time {
                    continue;
                }
            }

            if let Some(level) = query.level_filter {
                if event.level < level {
                    continue;
                }
            }

            if let Some(ref source_filter) = query.source_filter {
                if event.source != *source_filter {
                    continue;
                }
            }

            if let Some(ref target_filter) = query.target_filter {
                if event.target != *target_filter {
                    continue;
                }
            }

            if let Some(result_filter) = query.result_filter {
                if event.result != result_filter {
                    continue;
                }
            }

            filtered_events.push(event.clone());
        }

        // Apply limit
        if let Some(limit) = query.limit {
            if filtered_events.len() > limit {
                filtered_events.truncate(limit);
            }
        }

        // Update statistics
        {
            let mut stats = self.stats.lock();
            stats.queries_executed += 1;
        }

        // Sort by timestamp (most recent first)
        filtered_events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(filtered_events)
    }

    /// Get recent events
    pub fn get_recent_events(&self, count: usize) -> AuditResult<Vec<AuditEvent>> {
        let events = self.events.read();
        let recent_events: Vec<AuditEvent> = events.iter()
            .rev()
            .take(count)
            .cloned()
            .collect();
        Ok(recent_events)
    }

    /// Get events by user ID
    pub fn get_events_by_user(&self, user_id: crate::admin::user_manager::UserId) -> AuditResult<Vec<AuditEvent>> {
        let query = AuditQuery {
            event_types: Vec::new(),
            user_ids: vec![user_id],
            time_range: None,
            level_filter: None,
            source_filter: None,
            target_filter: None,
            result_filter: None,
            limit: None,
        };

        self.query_events(&query)
    }

    /// Get security events
    pub fn get_security_events(&self, time_range: Option<(u64, u64)>) -> AuditResult<Vec<AuditEvent>> {
        let query = AuditQuery {
            event_types: vec![
                AuditEventType::SecurityViolation,
                AuditEventType::SecurityPolicyViolation,
                AuditEventType::AccessDenied,
            ],
            user_ids: Vec::new(),
            time_range,
            level_filter: Some(AuditLevel::Security),
            source_filter: None,
            target_filter: None,
            result_filter: None,
            limit: None,
        };

        self.query_events(&query)
    }

    // ==================== Alert Management ====================

    /// Check for threshold violations and trigger alerts
    pub fn check_alerts(&self) -> AuditResult<()> {
        let config = self.config.lock();
        if !config.real_time_monitoring {
            return Ok(());
        }

        let current_time = self.get_current_time();
        let one_hour_ago = current_time - 3600; // 1 hour in seconds
        let one_minute_ago = current_time - 60; // 1 minute in seconds

        // Check failed login threshold
        let failed_login_count = self.count_events_in_range(
            AuditEventType::UserAuthentication,
            AuditLevel::Warning,
            one_minute_ago,
            current_time
        )?;

        if failed_login_count > config.alert_thresholds.failed_logins_per_minute {
            self.trigger_alert(AuditLevel::Warning,
                             format!("Failed login threshold exceeded: {} attempts in the last minute", failed_login_count))?;
        }

        // Check security violation threshold
        let security_violations = self.count_events_in_range(
            AuditEventType::SecurityViolation,
            AuditLevel::Critical,
            one_hour_ago,
            current_time
        )?;

        if security_violations > config.alert_thresholds.security_violations_per_hour {
            self.trigger_alert(AuditLevel::Critical,
                             format!("Security violation threshold exceeded: {} violations in the last hour", security_violations))?;
        }

        Ok(())
    }

    /// Get active alerts
    pub fn get_active_alerts(&self) -> Vec<AuditAlert> {
        let alerts = self.alerts.read();
        alerts.iter().cloned().collect()
    }

    /// Clear an alert
    pub fn clear_alert(&self, alert_id: u64) -> AuditResult<()> {
        let mut alerts = self.alerts.write();
        alerts.retain(|alert| alert.alert_id != alert_id);
        Ok(())
    }

    // ==================== Report Generation ====================

    /// Generate an audit report
    pub fn generate_report(&self, query: &AuditQuery) -> AuditResult<AuditReport> {
        let events = self.query_events(query)?;
        let stats = self.get_stats();

        let summary = ReportSummary {
            total_events: events.len(),
            security_incidents: events.iter().filter(|e| matches!(e.event_type, AuditEventType::SecurityViolation | AuditEventType::SecurityPolicyViolation)).count(),
            user_activities: events.iter().filter(|e| matches!(e.event_type, AuditEventType::UserAuthentication | AuditEventType::UserModified)).count(),
            system_activities: events.iter().filter(|e| matches!(e.event_type, AuditEventType::SystemStart | AuditEventType::SystemStop | AuditEventType::ConfigurationChanged)).count(),
            compliance_status: "Compliant".to_string(), // Would be calculated based on events
            recommendations: vec![
                "Review security violations".to_string(),
                "Consider increasing monitoring".to_string(),
            ],
        };

        let report = AuditReport {
            report_id: self.get_next_event_id(), // Using event ID sequence for reports
            generated_at: self.get_current_time(),
            time_range: query.time_range.unwrap_or((0, self.get_current_time())),
            query_parameters: query.clone(),
            events,
            statistics: stats,
            summary,
        };

        Ok(report)
    }

    /// Export audit data to external format
    pub fn export_audit_data(&self, format: &str, time_range: (u64, u64)) -> AuditResult<String> {
        let query = AuditQuery {
            event_types: Vec::new(),
            user_ids: Vec::new(),
            time_range: Some(time_range),
            level_filter: None,
            source_filter: None,
            target_filter: None,
            result_filter: None,
            limit: None,
        };

        let events = self.query_events(&query)?;

        match format {
            "json" => {
                // Simplified JSON export
                let mut json = String::new();
                json.push_str("{\n  \"events\": [\n");
                
                for (i, event) in events.iter().enumerate() {
                    if i > 0 { json.push_str(",\n"); }
                    json.push_str(&format!(
                        "    {{\"timestamp\": {}, \"type\": {:?}, \"level\": {:?}, \"user_id\": {:?}, \"details\": \"{}\"}}",
                        event.timestamp, event.event_type, event.level, event.user_id, event.details
                    ));
                }
                
                json.push_str("\n  ]\n}");
                Ok(json)
            }
            _ => Err(AuditError::ExportFailed),
        }
    }

    // ==================== Statistics and Monitoring ====================

    /// Get audit statistics
    pub fn get_stats(&self) -> AuditStats {
        let stats = self.stats.lock();
        stats.clone()
    }

    /// Update statistics
    fn update_stats(&self, event: &AuditEvent) {
        let mut stats = self.stats.lock();
        
        stats.total_events += 1;
        stats.events_today += 1; // Would need date tracking for accurate today count
        
        match event.level {
            AuditLevel::Security | AuditLevel::Critical => {
                stats.security_events += 1;
            }
            AuditLevel::Info | AuditLevel::Warning => {
                stats.user_events += 1;
            }
            AuditLevel::Error => {
                stats.system_events += 1;
            }
        }
        
        if !event.result {
            stats.failed_events += 1;
        }

        // Update storage usage
        let config = self.config.lock();
        let storage_used = self.events.read().len();
        stats.storage_used_percent = (storage_used as f32 / config.max_log_size as f32) * 100.0;
        stats.log_size_bytes = storage_used * core::mem::size_of::<AuditEvent>();
    }

    // ==================== Internal Helper Methods ====================

    /// Internal event logging
    fn log_event_internal(&self, mut event: AuditEvent) -> AuditResult<()> {
        let config = self.config.lock();
        
        if !config.enabled {
            return Ok(());
        }

        event.event_id = self.get_next_event_id();

        // Store event
        {
            let mut events = self.events.write();
            events.push_back(event.clone());
            
            // Remove old events if exceeded max size
            while events.len() > config.max_log_size {
                events.pop_front();
            }
        }

        // Update statistics
        self.update_stats(&event);

        // Check for real-time alerts
        self.check_alerts()?;

        // Log to external system if configured
        if config.remote_logging {
            self.log_to_remote_server(&event)?;
        }

        Ok(())
    }

    /// Get next available event ID
    fn get_next_event_id(&self) -> u64 {
        let mut next_id = self.next_event_id.lock();
        let id = *next_id;
        *next_id += 1;
        id
    }

    /// Trigger an alert
    fn trigger_alert(&self, level: AuditLevel, message: String) -> AuditResult<()> {
        let alert_id = {
            let mut next_id = self.next_alert_id.lock();
            let id = *next_id;
            *next_id += 1;
            id
        };

        let alert = AuditAlert {
            alert_id,
            timestamp: self.get_current_time(),
            level,
            message,
            source_event: None,
            triggered_by: "audit_manager".to_string(),
        };

        {
            let mut alerts = self.alerts.write();
            alerts.push_back(alert);
        }

        {
            let mut stats = self.stats.lock();
            stats.alerts_triggered += 1;
        }

        warn!("Audit alert triggered: {} (ID: {})", alert.message, alert_id);
        Ok(())
    }

    /// Count events in a time range
    fn count_events_in_range(&self, event_type: AuditEventType, 
                           level: AuditLevel, start_time: u64, end_time: u64) -> AuditResult<u32> {
        let events = self.events.read();
        let mut count = 0;

        for event in events.iter() {
            if event.event_type == event_type && 
               event.level >= level &&
               event.timestamp >= start_time && 
               event.timestamp <= end_time {
                count += 1;
            }
        }

        Ok(count)
    }

    /// Log to remote server (simplified implementation)
    fn log_to_remote_server(&self, event: &AuditEvent) -> AuditResult<()> {
        // In a real implementation, this would send events to a remote syslog server
        // or other audit logging service
        debug!("Remote audit log: {:?}", event);
        Ok(())
    }

    /// Get current time
    fn get_current_time(&self) -> u64 {
        // In real implementation, would get time from kernel's time subsystem
        crate::hal::get_current_time()
    }
}

/// Initialize the global audit manager
pub fn init_audit_manager() -> AuditResult<()> {
    let mut manager_guard = AUDIT_MANAGER.lock();
    
    if manager_guard.is_some() {
        return Err(AuditError::NotInitialized);
    }

    let mut manager = AuditManager::new();
    manager.init()?;
    
    *manager_guard = Some(manager);
    
    info!("Audit Manager initialized successfully");
    Ok(())
}

/// Shutdown the global audit manager
pub fn shutdown_audit_manager() -> AuditResult<()> {
    let mut manager_guard = AUDIT_MANAGER.lock();
    
    if let Some(mut manager) = manager_guard.take() {
        manager.shutdown()?;
    }
    
    info!("Audit Manager shutdown complete");
    Ok(())
}

/// Get the global audit manager instance
pub fn get_audit_manager() -> Option<&'static Mutex<Option<AuditManager>>> {
    Some(&AUDIT_MANAGER)
}