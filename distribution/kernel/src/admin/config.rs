//! MultiOS Configuration Management Module
//! 
//! This module provides comprehensive configuration management functionality including:
//! - System configuration storage and retrieval
//! - Configuration validation and normalization
//! - Configuration backup and restore
//! - Runtime configuration updates
//! - Integration with other admin modules

#![no_std]
#![feature(alloc)]

use spin::{Mutex, RwLock};
use alloc::vec::Vec;
use alloc::string::{String, ToString};
use alloc::collections::HashMap;

/// Configuration management result
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConfigError {
    KeyNotFound = 0,
    InvalidValue = 1,
    PermissionDenied = 2,
    ConfigurationCorrupted = 3,
    StorageError = 4,
    ValidationFailed = 5,
    BackupFailed = 6,
    RestoreFailed = 7,
    NotInitialized = 8,
    ConcurrentModification = 9,
    InvalidType = 10,
}

/// Configuration value types
#[derive(Debug, Clone)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Float(f64),
    Array(Vec<ConfigValue>),
    Object(HashMap<String, ConfigValue>),
}

/// Configuration entry
#[derive(Debug, Clone)]
pub struct ConfigEntry {
    pub key: String,
    pub value: ConfigValue,
    pub value_type: String,
    pub description: Option<String>,
    pub is_system: bool,
    pub is_readonly: bool,
    pub created_time: u64,
    pub modified_time: u64,
    pub access_level: u8,
}

/// Configuration schema validation rule
#[derive(Debug, Clone)]
pub struct ConfigValidationRule {
    pub rule_type: ValidationRuleType,
    pub parameters: HashMap<String, String>,
    pub error_message: String,
}

/// Validation rule types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ValidationRuleType {
    Required = 0,
    MinLength = 1,
    MaxLength = 2,
    MinValue = 3,
    MaxValue = 4,
    Pattern = 5,
    Type = 6,
    Range = 7,
}

/// Configuration backup
#[derive(Debug, Clone)]
pub struct ConfigBackup {
    pub backup_id: u64,
    pub timestamp: u64,
    pub description: String,
    pub version: String,
    pub entries: HashMap<String, ConfigEntry>,
    pub checksum: u64,
}

/// Configuration version information
#[derive(Debug, Clone)]
pub struct ConfigVersion {
    pub version_number: u32,
    pub timestamp: u64,
    pub description: String,
    pub changes: Vec<ConfigChange>,
    pub author: String,
}

/// Configuration change record
#[derive(Debug, Clone)]
pub struct ConfigChange {
    pub change_id: u64,
    pub operation: ConfigOperation,
    pub key: String,
    pub old_value: Option<ConfigValue>,
    pub new_value: Option<ConfigValue>,
    pub timestamp: u64,
    pub user_id: Option<u32>,
}

/// Configuration operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConfigOperation {
    Set = 0,
    Delete = 1,
    Rename = 2,
    Restore = 3,
}

/// Configuration statistics
#[derive(Debug, Clone)]
pub struct ConfigStats {
    pub total_entries: usize,
    pub system_entries: usize,
    pub user_entries: usize,
    pub readonly_entries: usize,
    pub modified_today: usize,
    pub backups_created: u64,
    pub restoration_count: u64,
    pub validation_failures: u64,
}

/// Global configuration manager instance
static CONFIG_MANAGER: Mutex<Option<ConfigManager>> = Mutex::new(None);

/// Configuration Manager - Main orchestrator for configuration operations
pub struct ConfigManager {
    entries: RwLock<HashMap<String, ConfigEntry>>,
    validation_rules: RwLock<HashMap<String, Vec<ConfigValidationRule>>>,
    backups: RwLock<Vec<ConfigBackup>>,
    versions: RwLock<Vec<ConfigVersion>>,
    changes: RwLock<Vec<ConfigChange>>,
    next_backup_id: Mutex<u64>,
    next_version_id: Mutex<u32>,
    next_change_id: Mutex<u64>,
    initialized: bool,
    stats: Mutex<ConfigStats>,
}

impl ConfigManager {
    /// Create a new Configuration Manager instance
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            validation_rules: RwLock::new(HashMap::new()),
            backups: RwLock::new(Vec::new()),
            versions: RwLock::new(Vec::new()),
            changes: RwLock::new(Vec::new()),
            next_backup_id: Mutex::new(1),
            next_version_id: Mutex::new(1),
            next_change_id: Mutex::new(1),
            initialized: false,
            stats: Mutex::new(ConfigStats {
                total_entries: 0,
                system_entries: 0,
                user_entries: 0,
                readonly_entries: 0,
                modified_today: 0,
                backups_created: 0,
                restoration_count: 0,
                validation_failures: 0,
            }),
        }
    }

    /// Initialize the configuration manager
    pub fn init(&mut self) -> ConfigResult<()> {
        if self.initialized {
            return Err(ConfigError::NotInitialized);
        }

        // Create default configuration entries
        self.create_default_config()?;
        
        // Set up default validation rules
        self.setup_default_validation_rules()?;

        self.initialized = true;
        
        info!("Configuration Manager initialized successfully");
        Ok(())
    }

    /// Shutdown the configuration manager
    pub fn shutdown(&mut self) -> ConfigResult<()> {
        if !self.initialized {
            return Err(ConfigError::NotInitialized);
        }

        // Create final backup
        self.create_backup("Final configuration backup")?;

        self.initialized = false;
        info!("Configuration Manager shutdown complete");
        Ok(())
    }

    // ==================== Configuration CRUD Operations ====================

    /// Set a configuration value
    pub fn set_config(&self, key: &str, value: ConfigValue, 
                     user_id: Option<u32>, description: Option<&str>) -> ConfigResult<()> {
        let key = key.to_string();
        
        // Validate configuration value
        if let Err(e) = self.validate_value(&key, &value) {
            let mut stats = self.stats.lock();
            stats.validation_failures += 1;
            return Err(e);
        }

        let timestamp = self.get_current_time();
        
        {
            let mut entries = self.entries.write();
            
            let (is_new, was_readonly) = {
                let existing_entry = entries.get(&key);
                if let Some(entry) = existing_entry {
                    if entry.is_readonly {
                        return Err(ConfigError::PermissionDenied);
                    }
                    (false, entry.is_readonly)
                } else {
                    (true, false)
                }
            };

            let entry = ConfigEntry {
                key: key.clone(),
                value: value.clone(),
                value_type: self.get_value_type_name(&value),
                description: description.map(|d| d.to_string()),
                is_system: key.starts_with("system."),
                is_readonly: was_readonly,
                created_time: if is_new { timestamp } else { 
                    entries.get(&key).map(|e| e.created_time).unwrap_or(timestamp) 
                },
                modified_time: timestamp,
                access_level: 0, // Default access level
            };

            // Record change
            if !is_new {
                let old_value = entries.get(&key).map(|e| e.value.clone());
                self.record_change(ConfigOperation::Set, &key, old_value, Some(value.clone()), user_id);
            }

            entries.insert(key, entry);
        }

        // Update statistics
        self.update_stats();
        
        info!("Configuration updated: {}", key);
        Ok(())
    }

    /// Get a configuration value
    pub fn get_config(&self, key: &str) -> ConfigResult<ConfigEntry> {
        let entries = self.entries.read();
        let entry = entries.get(key)
            .ok_or(ConfigError::KeyNotFound)?;
        Ok(entry.clone())
    }

    /// Get a configuration value with type conversion
    pub fn get_config_as_string(&self, key: &str) -> ConfigResult<String> {
        let entries = self.entries.read();
        let entry = entries.get(key).ok_or(ConfigError::KeyNotFound)?;
        
        match &entry.value {
            ConfigValue::String(s) => Ok(s.clone()),
            ConfigValue::Integer(i) => Ok(i.to_string()),
            ConfigValue::Boolean(b) => Ok(b.to_string()),
            ConfigValue::Float(f) => Ok(f.to_string()),
            _ => Err(ConfigError::InvalidType),
        }
    }

    /// Get a configuration value as boolean
    pub fn get_config_as_bool(&self, key: &str) -> ConfigResult<bool> {
        let entries = self.entries.read();
        let entry = entries.get(key).ok_or(ConfigError::KeyNotFound)?;
        
        match &entry.value {
            ConfigValue::Boolean(b) => Ok(*b),
            ConfigValue::String(s) => match s.as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidType),
            },
            ConfigValue::Integer(i) => Ok(*i != 0),
            _ => Err(ConfigError::InvalidType),
        }
    }

    /// Get a configuration value as integer
    pub fn get_config_as_integer(&self, key: &str) -> ConfigResult<i64> {
        let entries = self.entries.read();
        let entry = entries.get(key).ok_or(ConfigError::KeyNotFound)?;
        
        match &entry.value {
            ConfigValue::Integer(i) => Ok(*i),
            ConfigValue::String(s) => s.parse::<i64>().map_err(|_| ConfigError::InvalidType),
            ConfigValue::Boolean(b) => Ok(if *b { 1 } else { 0 }),
            ConfigValue::Float(f) => Ok(*f as i64),
            _ => Err(ConfigError::InvalidType),
        }
    }

    /// Delete a configuration value
    pub fn delete_config(&self, key: &str, user_id: Option<u32>) -> ConfigResult<()> {
        {
            let mut entries = self.entries.write();
            let entry = entries.get(key).ok_or(ConfigError::KeyNotFound)?;
            
            if entry.is_readonly {
                return Err(ConfigError::PermissionDenied);
            }

            let old_value = entry.value.clone();
            entries.remove(key);
            
            // Record change
            self.record_change(ConfigOperation::Delete, key, Some(old_value), None, user_id);
        }

        self.update_stats();
        info!("Configuration deleted: {}", key);
        Ok(())
    }

    /// List all configuration keys
    pub fn list_config_keys(&self) -> Vec<String> {
        let entries = self.entries.read();
        entries.keys().cloned().collect()
    }

    /// List configuration entries with optional filter
    pub fn list_config_entries(&self, filter: Option<&str>) -> Vec<ConfigEntry> {
        let entries = self.entries.read();
        let mut result = Vec::new();
        
        for entry in entries.values() {
            if let Some(filter_str) = filter {
                if !entry.key.contains(filter_str) && 
                   !entry.description.as_ref().map_or(false, |d| d.contains(filter_str)) {
                    continue;
                }
            }
            result.push(entry.clone());
        }
        
        result
    }

    // ==================== Configuration Backup and Restore ====================

    /// Create a configuration backup
    pub fn create_backup(&self, description: &str) -> ConfigResult<u64> {
        let backup_id = self.get_next_backup_id();
        let timestamp = self.get_current_time();
        
        let entries = self.entries.read();
        let mut backup_entries = HashMap::new();
        
        for (key, entry) in entries.iter() {
            backup_entries.insert(key.clone(), entry.clone());
        }
        
        let checksum = self.calculate_checksum(&backup_entries);
        
        let backup = ConfigBackup {
            backup_id,
            timestamp,
            description: description.to_string(),
            version: "1.0".to_string(), // Would be actual version
            entries: backup_entries,
            checksum,
        };

        {
            let mut backups = self.backups.write();
            backups.push(backup);
            
            // Keep only last 10 backups
            if backups.len() > 10 {
                backups.remove(0);
            }
        }

        // Update statistics
        {
            let mut stats = self.stats.lock();
            stats.backups_created += 1;
        }

        info!("Created configuration backup: {} (ID: {})", description, backup_id);
        Ok(backup_id)
    }

    /// Restore configuration from backup
    pub fn restore_from_backup(&self, backup_id: u64, user_id: Option<u32>) -> ConfigResult<()> {
        let backups = self.backups.read();
        let backup = backups.iter()
            .find(|b| b.backup_id == backup_id)
            .ok_or(ConfigError::KeyNotFound)?;

        // Validate backup integrity
        let current_checksum = self.calculate_checksum(&backup.entries);
        if current_checksum != backup.checksum {
            return Err(ConfigError::BackupFailed);
        }

        // Create backup of current configuration before restore
        self.create_backup("Auto-backup before restore")?;

        // Restore configuration
        {
            let mut entries = self.entries.write();
            entries.clear();
            
            for (key, entry) in &backup.entries {
                entries.insert(key.clone(), entry.clone());
            }
        }

        // Record restoration
        self.record_change(ConfigOperation::Restore, "all", None, None, user_id);
        
        // Update statistics
        {
            let mut stats = self.stats.lock();
            stats.restoration_count += 1;
        }

        info!("Restored configuration from backup: {}", backup.description);
        Ok(())
    }

    /// List available backups
    pub fn list_backups(&self) -> Vec<ConfigBackup> {
        let backups = self.backups.read();
        backups.iter().cloned().collect()
    }

    // ==================== Configuration Validation ====================

    /// Validate configuration value against rules
    fn validate_value(&self, key: &str, value: &ConfigValue) -> ConfigResult<()> {
        let validation_rules = self.validation_rules.read();
        
        if let Some(rules) = validation_rules.get(key) {
            for rule in rules {
                if let Err(e) = self.apply_validation_rule(value, rule) {
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Apply a single validation rule
    fn apply_validation_rule(&self, value: &ConfigValue, rule: &ConfigValidationRule) -> ConfigResult<()> {
        match rule.rule_type {
            ValidationRuleType::Required => {
                if let ConfigValue::String(s) = value {
                    if s.is_empty() {
                        return Err(ConfigError::ValidationFailed);
                    }
                }
            }
            ValidationRuleType::MinLength => {
                if let ConfigValue::String(s) = value {
                    if let Some(min_len_str) = rule.parameters.get("min_length") {
                        if let Ok(min_len) = min_len_str.parse::<usize>() {
                            if s.len() < min_len {
                                return Err(ConfigError::ValidationFailed);
                            }
                        }
                    }
                }
            }
            ValidationRuleType::MaxLength => {
                if let ConfigValue::String(s) = value {
                    if let Some(max_len_str) = rule.parameters.get("max_length") {
                        if let Ok(max_len) = max_len_str.parse::<usize>() {
                            if s.len() > max_len {
                                return Err(ConfigError::ValidationFailed);
                            }
                        }
                    }
                }
            }
            ValidationRuleType::MinValue => {
                if let Some(min_val_str) = rule.parameters.get("min_value") {
                    if let Ok(min_val) = min_val_str.parse::<i64>() {
                        if let ConfigValue::Integer(val) = value {
                            if *val < min_val {
                                return Err(ConfigError::ValidationFailed);
                            }
                        }
                    }
                }
            }
            ValidationRuleType::MaxValue => {
                if let Some(max_val_str) = rule.parameters.get("max_value") {
                    if let Ok(max_val) = max_val_str.parse::<i64>() {
                        if let ConfigValue::Integer(val) = value {
                            if *val > max_val {
                                return Err(ConfigError::ValidationFailed);
                            }
                        }
                    }
                }
            }
            ValidationRuleType::Pattern => {
                if let ConfigValue::String(s) = value {
                    if let Some(pattern) = rule.parameters.get("regex") {
                        // Simplified regex matching - in real implementation would use proper regex
                        if !s.contains(pattern) {
                            return Err(ConfigError::ValidationFailed);
                        }
                    }
                }
            }
            ValidationRuleType::Type => {
                let expected_type = rule.parameters.get("type")
                    .ok_or(ConfigError::ConfigurationCorrupted)?;
                
                let actual_type = self.get_value_type_name(value);
                if actual_type != *expected_type {
                    return Err(ConfigError::InvalidType);
                }
            }
            ValidationRuleType::Range => {
                if let Some(range) = rule.parameters.get("range") {
                    if let ConfigValue::Integer(val) = value {
                        if let Some((min_str, max_str)) = range.split('-').collect::<Vec<_>>().split_first() {
                            if let (Ok(min_val), Ok(max_val)) = (min_str.parse::<i64>(), max_str.parse::<i64>()) {
                                if *val < min_val || *val > max_val {
                                    return Err(ConfigError::ValidationFailed);
                                }
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Add validation rule for a configuration key
    pub fn add_validation_rule(&self, key: &str, rule: ConfigValidationRule) -> ConfigResult<()> {
        let mut validation_rules = self.validation_rules.write();
        validation_rules.entry(key.to_string())
            .or_insert_with(Vec::new)
            .push(rule);
        Ok(())
    }

    // ==================== Configuration History and Change Tracking ====================

    /// Get configuration change history
    pub fn get_change_history(&self, key: Option<&str>, limit: Option<usize>) -> Vec<ConfigChange> {
        let changes = self.changes.read();
        let mut filtered_changes: Vec<ConfigChange> = Vec::new();

        for change in changes.iter().rev() {
            if let Some(filter_key) = key {
                if change.key != filter_key {
                    continue;
                }
            }
            filtered_changes.push(change.clone());
            
            if let Some(limit_count) = limit {
                if filtered_changes.len() >= limit_count {
                    break;
                }
            }
        }

        filtered_changes
    }

    /// Get configuration version history
    pub fn get_version_history(&self) -> Vec<ConfigVersion> {
        let versions = self.versions.read();
        versions.iter().cloned().collect()
    }

    /// Create a configuration version
    pub fn create_version(&self, description: &str, author: &str) -> ConfigResult<u32> {
        let version_id = self.get_next_version_id();
        let timestamp = self.get_current_time();
        
        let changes = self.changes.read();
        let recent_changes: Vec<_> = changes.iter()
            .filter(|c| timestamp - c.timestamp < 3600) // Last hour
            .cloned()
            .collect();

        let version = ConfigVersion {
            version_number: version_id,
            timestamp,
            description: description.to_string(),
            changes: recent_changes,
            author: author.to_string(),
        };

        {
            let mut versions = self.versions.write();
            versions.push(version);
        }

        info!("Created configuration version: {} (ID: {})", description, version_id);
        Ok(version_id)
    }

    // ==================== Internal Helper Methods ====================

    /// Create default configuration entries
    fn create_default_config(&self) -> ConfigResult<()> {
        // System configuration
        self.set_config("system.hostname", ConfigValue::String("multios".to_string()), None, Some("System hostname"))?;
        self.set_config("system.timezone", ConfigValue::String("UTC".to_string()), None, Some("System timezone"))?;
        self.set_config("system.language", ConfigValue::String("en-US".to_string()), None, Some("System language"))?;
        
        // Security configuration
        self.set_config("security.password_policy.min_length", ConfigValue::Integer(8), None, Some("Minimum password length"))?;
        self.set_config("security.password_policy.require_uppercase", ConfigValue::Boolean(true), None, Some("Require uppercase letters"))?;
        self.set_config("security.audit.enabled", ConfigValue::Boolean(true), None, Some("Enable audit logging"))?;
        self.set_config("security.session.timeout", ConfigValue::Integer(3600), None, Some("Session timeout in seconds"))?;
        
        // Network configuration
        self.set_config("network.dhcp.enabled", ConfigValue::Boolean(true), None, Some("Enable DHCP"))?;
        self.set_config("network.dns.servers", ConfigValue::Array(vec![
            ConfigValue::String("8.8.8.8".to_string()),
            ConfigValue::String("8.8.4.4".to_string()),
        ]), None, Some("DNS server addresses"))?;
        
        // User management configuration
        self.set_config("user.max_failed_logins", ConfigValue::Integer(5), None, Some("Maximum failed login attempts"))?;
        self.set_config("user.account_lockout_duration", ConfigValue::Integer(1800), None, Some("Account lockout duration in seconds"))?;
        
        // File system configuration
        self.set_config("filesystem.max_file_size", ConfigValue::Integer(1073741824), None, Some("Maximum file size in bytes"))?; // 1GB
        self.set_config("filesystem.backup.retention_days", ConfigValue::Integer(30), None, Some("Backup retention period in days"))?;

        info!("Created default configuration entries");
        Ok(())
    }

    /// Set up default validation rules
    fn setup_default_validation_rules(&self) -> ConfigResult<()> {
        // System configuration validation
        self.add_validation_rule("system.hostname", ConfigValidationRule {
            rule_type: ValidationRuleType::Required,
            parameters: HashMap::new(),
            error_message: "Hostname is required".to_string(),
        })?;

        self.add_validation_rule("system.hostname", ConfigValidationRule {
            rule_type: ValidationRuleType::Pattern,
            parameters: [("regex".to_string(), "^[a-zA-Z0-9.-]+$".to_string())].iter().cloned().collect(),
            error_message: "Hostname contains invalid characters".to_string(),
        })?;

        // Password policy validation
        self.add_validation_rule("security.password_policy.min_length", ConfigValidationRule {
            rule_type: ValidationRuleType::Range,
            parameters: [("range".to_string(), "4-128".to_string())].iter().cloned().collect(),
            error_message: "Minimum password length must be between 4 and 128".to_string(),
        })?;

        // Session timeout validation
        self.add_validation_rule("security.session.timeout", ConfigValidationRule {
            rule_type: ValidationRuleType::MinValue,
            parameters: [("min_value".to_string(), "60".to_string())].iter().cloned().collect(),
            error_message: "Session timeout must be at least 60 seconds".to_string(),
        })?;

        info!("Set up default validation rules");
        Ok(())
    }

    /// Record a configuration change
    fn record_change(&self, operation: ConfigOperation, key: &str, 
                    old_value: Option<ConfigValue>, new_value: Option<ConfigValue>,
                    user_id: Option<u32>) {
        let change = ConfigChange {
            change_id: self.get_next_change_id(),
            operation,
            key: key.to_string(),
            old_value,
            new_value,
            timestamp: self.get_current_time(),
            user_id,
        };

        {
            let mut changes = self.changes.write();
            changes.push(change);
            
            // Keep only last 1000 changes
            if changes.len() > 1000 {
                changes.remove(0);
            }
        }
    }

    /// Get value type name
    fn get_value_type_name(&self, value: &ConfigValue) -> String {
        match value {
            ConfigValue::String(_) => "string".to_string(),
            ConfigValue::Integer(_) => "integer".to_string(),
            ConfigValue::Boolean(_) => "boolean".to_string(),
            ConfigValue::Float(_) => "float".to_string(),
            ConfigValue::Array(_) => "array".to_string(),
            ConfigValue::Object(_) => "object".to_string(),
        }
    }

    /// Calculate checksum for backup integrity
    fn calculate_checksum(&self, entries: &HashMap<String, ConfigEntry>) -> u64 {
        let mut checksum = 0u64;
        for entry in entries.values() {
            // Simplified checksum calculation
            let key_hash = self.simple_hash(&entry.key);
            let value_hash = self.simple_hash(&format!("{:?}", entry.value));
            checksum ^= key_hash ^ value_hash;
        }
        checksum
    }

    /// Simple hash function for checksum calculation
    fn simple_hash(&self, s: &str) -> u64 {
        let mut hash = 0u64;
        for c in s.bytes() {
            hash = hash.wrapping_mul(31).wrapping_add(c as u64);
        }
        hash
    }

    /// Update statistics
    fn update_stats(&self) {
        let mut stats = self.stats.lock();
        let entries = self.entries.read();
        
        stats.total_entries = entries.len();
        stats.system_entries = entries.values().filter(|e| e.is_system).count();
        stats.user_entries = entries.values().filter(|e| !e.is_system).count();
        stats.readonly_entries = entries.values().filter(|e| e.is_readonly).count();
        
        // Count entries modified today
        let today_start = self.get_current_time() - (self.get_current_time() % 86400); // Start of today
        stats.modified_today = entries.values()
            .filter(|e| e.modified_time >= today_start)
            .count();
    }

    /// Get configuration statistics
    pub fn get_stats(&self) -> ConfigStats {
        let stats = self.stats.lock();
        stats.clone()
    }

    /// Get next backup ID
    fn get_next_backup_id(&self) -> u64 {
        let mut next_id = self.next_backup_id.lock();
        let id = *next_id;
        *next_id += 1;
        id
    }

    /// Get next version ID
    fn get_next_version_id(&self) -> u32 {
        let mut next_id = self.next_version_id.lock();
        let id = *next_id;
        *next_id += 1;
        id
    }

    /// Get next change ID
    fn get_next_change_id(&self) -> u64 {
        let mut next_id = self.next_change_id.lock();
        let id = *next_id;
        *next_id += 1;
        id
    }

    /// Get current time
    fn get_current_time(&self) -> u64 {
        // In real implementation, would get time from kernel's time subsystem
        crate::hal::get_current_time()
    }
}

/// Initialize the global configuration manager
pub fn init_config_manager() -> ConfigResult<()> {
    let mut manager_guard = CONFIG_MANAGER.lock();
    
    if manager_guard.is_some() {
        return Err(ConfigError::NotInitialized);
    }

    let mut manager = ConfigManager::new();
    manager.init()?;
    
    *manager_guard = Some(manager);
    
    info!("Configuration Manager initialized successfully");
    Ok(())
}

/// Shutdown the global configuration manager
pub fn shutdown_config_manager() -> ConfigResult<()> {
    let mut manager_guard = CONFIG_MANAGER.lock();
    
    if let Some(mut manager) = manager_guard.take() {
        manager.shutdown()?;
    }
    
    info!("Configuration Manager shutdown complete");
    Ok(())
}

/// Get the global configuration manager instance
pub fn get_config_manager() -> Option<&'static Mutex<Option<ConfigManager>>> {
    Some(&CONFIG_MANAGER)
}