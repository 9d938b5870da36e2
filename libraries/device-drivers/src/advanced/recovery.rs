//! Error Recovery Module
//! 
//! Provides comprehensive error detection, analysis, and recovery capabilities
//! for device drivers with configurable recovery strategies.

use crate::AdvancedDriverId;
use crate::AdvancedDriverError::{self, *};
use alloc::collections::{BTreeMap, VecDeque, HashMap, HashSet};
use alloc::string::String;
use log::{debug, warn, error, info};

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,   // Non-critical error
    Error,     // Serious error affecting functionality
    Critical,  // Critical error requiring immediate action
    Fatal,     // Fatal error requiring system restart
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Hardware,       // Hardware-related error
    Software,       // Software/driver error
    Resource,       // Resource exhaustion
    Timeout,        // Operation timeout
    Permission,     // Permission/access error
    Configuration,  // Configuration error
    Dependency,     // Dependency error
    Unknown,        // Unknown error type
}

/// Error information
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub error_id: u64,
    pub driver_id: AdvancedDriverId,
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub error_code: AdvancedDriverError,
    pub description: String,
    pub timestamp: u64,
    pub context: String,
    pub recoverable: bool,
    pub retry_count: u32,
}

/// Recovery strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStrategy {
    Retry,              // Simple retry
    ResetDevice,        // Reset the device
    ReloadDriver,       // Reload the driver
    SwitchDriver,       // Switch to backup driver
    PowerCycle,         // Power cycle the device
    ResetBus,           // Reset the bus
    RestartSystem,      // Restart the system
    ManualIntervention, // Requires manual intervention
}

/// Recovery attempt information
#[derive(Debug, Clone)]
pub struct RecoveryAttempt {
    pub attempt_id: u64,
    pub error_id: u64,
    pub strategy: RecoveryStrategy,
    pub start_timestamp: u64,
    pub end_timestamp: Option<u64>,
    pub success: Option<bool>,
    pub details: String,
}

/// Enhanced recovery statistics
#[derive(Debug, Clone)]
pub struct EnhancedRecoveryStatistics {
    pub total_errors: u64,
    pub error_patterns: u32,
    pub total_recovery_attempts: u64,
    pub successful_recoveries: u64,
    pub failed_recoveries: u64,
    pub success_rate: f32,
    pub adaptive_thresholds: u32,
    pub learned_patterns: u32,
    pub failed_strategy_patterns: u32,
}

/// Error pattern for pattern matching
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorPattern {
    pub error_code: AdvancedDriverError,
    pub context_pattern: String,
    pub occurrence_count: u32,
    pub first_seen: u64,
    pub last_seen: u64,
}

/// Recovery success probability
#[derive(Debug, Clone, Copy)]
pub struct RecoveryProbability {
    pub strategy: RecoveryStrategy,
    pub probability: f32, // 0.0 to 1.0
    pub success_count: u32,
    pub failure_count: u32,
}

/// Intelligent recovery advisor
#[derive(Debug, Clone)]
pub struct RecoveryAdvisor {
    pub pattern_success_rates: HashMap<ErrorPattern, HashMap<RecoveryStrategy, RecoveryProbability>>,
    pub contextual_recommendations: BTreeMap<String, Vec<RecoveryStrategy>>,
    pub learning_enabled: bool,
}

/// Enhanced recovery manager with intelligent capabilities
pub struct EnhancedRecoveryManager {
    error_log: VecDeque<ErrorInfo>,
    recovery_attempts: VecDeque<RecoveryAttempt>,
    recovery_strategies: BTreeMap<ErrorCategory, Vec<RecoveryStrategy>>,
    error_thresholds: BTreeMap<(AdvancedDriverId, ErrorCategory), u32>,
    active_recovery: BTreeMap<u64, RecoveryAttempt>,
    max_errors_per_driver: u32,
    max_recovery_attempts: u32,
    auto_recovery_enabled: bool,
    notification_callbacks: Vec<fn(&ErrorInfo)>,
    error_counter: u64,
    recovery_counter: u64,
    
    // Enhanced capabilities
    error_patterns: HashMap<ErrorPattern, Vec<ErrorInfo>>,
    recovery_advisor: RecoveryAdvisor,
    recovery_history: VecDeque<RecoveryAttempt>,
    failed_recovery_patterns: HashSet<RecoveryStrategy>,
    context_analyzer: ContextAnalyzer,
    adaptive_thresholds: BTreeMap<(AdvancedDriverId, ErrorCategory), AdaptiveThreshold>,
    recovery_success_cache: HashMap<(AdvancedDriverId, ErrorCategory, RecoveryStrategy), f32>,
}

/// Context analyzer for error patterns
#[derive(Debug, Clone)]
pub struct ContextAnalyzer {
    pub pattern_matching_enabled: bool,
    pub sequence_analysis: bool,
    pub contextual_hints: BTreeMap<String, Vec<String>>,
}

/// Adaptive error threshold
#[derive(Debug, Clone)]
pub struct AdaptiveThreshold {
    pub base_threshold: u32,
    pub current_threshold: u32,
    pub adaptation_rate: f32,
    pub last_adjustment: u64,
}

/// Backwards compatibility type alias
pub type RecoveryManager = EnhancedRecoveryManager;

impl EnhancedRecoveryManager {
    /// Create a new enhanced recovery manager
    pub fn new() -> Self {
        info!("Initializing Enhanced Error Recovery Manager");
        
        let mut strategies = BTreeMap::new();
        
        // Define default recovery strategies
        strategies.insert(ErrorCategory::Hardware, vec![
            RecoveryStrategy::ResetDevice,
            RecoveryStrategy::PowerCycle,
            RecoveryStrategy::ResetBus,
        ]);
        
        strategies.insert(ErrorCategory::Software, vec![
            RecoveryStrategy::ReloadDriver,
            RecoveryStrategy::ResetDevice,
        ]);
        
        strategies.insert(ErrorCategory::Resource, vec![
            RecoveryStrategy::Retry,
            RecoveryStrategy::ResetDevice,
        ]);
        
        strategies.insert(ErrorCategory::Timeout, vec![
            RecoveryStrategy::Retry,
            RecoveryStrategy::ResetDevice,
        ]);
        
        strategies.insert(ErrorCategory::Permission, vec![
            RecoveryStrategy::ManualIntervention,
        ]);
        
        strategies.insert(ErrorCategory::Configuration, vec![
            RecoveryStrategy::ReloadDriver,
            RecoveryStrategy::ResetDevice,
        ]);
        
        strategies.insert(ErrorCategory::Dependency, vec![
            RecoveryStrategy::ReloadDriver,
        ]);
        
        strategies.insert(ErrorCategory::Unknown, vec![
            RecoveryStrategy::Retry,
            RecoveryStrategy::ReloadDriver,
        ]);

        // Initialize enhanced capabilities
        let recovery_advisor = RecoveryAdvisor {
            pattern_success_rates: HashMap::new(),
            contextual_recommendations: Self::initialize_contextual_recommendations(),
            learning_enabled: true,
        };

        let context_analyzer = ContextAnalyzer {
            pattern_matching_enabled: true,
            sequence_analysis: true,
            contextual_hints: Self::initialize_contextual_hints(),
        };

        let manager = Self {
            error_log: VecDeque::new(),
            recovery_attempts: VecDeque::new(),
            recovery_strategies: strategies,
            error_thresholds: BTreeMap::new(),
            active_recovery: BTreeMap::new(),
            max_errors_per_driver: 10,
            max_recovery_attempts: 3,
            auto_recovery_enabled: true,
            notification_callbacks: Vec::new(),
            error_counter: 0,
            recovery_counter: 0,
            
            // Enhanced capabilities
            error_patterns: HashMap::new(),
            recovery_advisor,
            recovery_history: VecDeque::new(),
            failed_recovery_patterns: HashSet::new(),
            context_analyzer,
            adaptive_thresholds: BTreeMap::new(),
            recovery_success_cache: HashMap::new(),
        };
        
        info!("Enhanced Error Recovery Manager initialized with intelligent recovery {}", 
              if manager.auto_recovery_enabled { "enabled" } else { "disabled" });
        manager
    }

    /// Initialize contextual recommendations
    fn initialize_contextual_recommendations() -> BTreeMap<String, Vec<RecoveryStrategy>> {
        let mut recommendations = BTreeMap::new();
        
        recommendations.insert("USB hub".to_string(), vec![
            RecoveryStrategy::ResetBus,
            RecoveryStrategy::PowerCycle,
            RecoveryStrategy::ReloadDriver,
        ]);
        
        recommendations.insert("PCI device".to_string(), vec![
            RecoveryStrategy::ResetDevice,
            RecoveryStrategy::ReloadDriver,
            RecoveryStrategy::PowerCycle,
        ]);
        
        recommendations.insert("Network adapter".to_string(), vec![
            RecoveryStrategy::ResetDevice,
            RecoveryStrategy::ReloadDriver,
            RecoveryStrategy::Retry,
        ]);
        
        recommendations.insert("Storage controller".to_string(), vec![
            RecoveryStrategy::ReloadDriver,
            RecoveryStrategy::ResetDevice,
        ]);
        
        recommendations
    }

    /// Initialize contextual hints
    fn initialize_contextual_hints() -> BTreeMap<String, Vec<String>> {
        let mut hints = BTreeMap::new();
        
        hints.insert("timeout".to_string(), vec![
            "Check system load".to_string(),
            "Verify hardware connectivity".to_string(),
            "Review timeout configuration".to_string(),
        ]);
        
        hints.insert("resource".to_string(), vec![
            "Check memory usage".to_string(),
            "Verify resource limits".to_string(),
            "Review allocation patterns".to_string(),
        ]);
        
        hints.insert("hardware".to_string(), vec![
            "Check hardware connections".to_string(),
            "Verify power supply".to_string(),
            "Review hardware specifications".to_string(),
        ]);
        
        hints
    }

    /// Enhanced error reporting with pattern analysis
    pub fn report_error(&mut self, driver_id: AdvancedDriverId, error_code: AdvancedDriverError, description: String) -> Result<u64, AdvancedDriverError> {
        let error_id = self.allocate_error_id();
        
        let error_info = ErrorInfo {
            error_id,
            driver_id,
            category: self.classify_error(error_code),
            severity: self.determine_severity(error_code),
            error_code,
            description,
            timestamp: 0, // TODO: Get actual timestamp
            context: "Enhanced error reported".to_string(),
            recoverable: self.is_recoverable(error_code),
            retry_count: 0,
        };
        
        debug!("Reporting enhanced error {}: {} for driver {:?}", error_id, description, driver_id);
        
        // Add to error log
        self.error_log.push_back(error_info.clone());
        
        // Perform pattern analysis
        self.analyze_error_patterns(&error_info);
        
        // Limit log size
        if self.error_log.len() > 1000 {
            self.error_log.pop_front();
        }
        
        // Update error threshold tracking
        let threshold_key = (driver_id, error_info.category);
        *self.error_thresholds.entry(threshold_key).or_insert(0) += 1;
        
        // Check adaptive thresholds
        self.update_adaptive_threshold(driver_id, error_info.category);
        
        // Notify callbacks
        self.notify_error(&error_info);
        
        // Check if auto-recovery should be attempted
        if self.auto_recovery_enabled && error_info.recoverable {
            self.attempt_intelligent_recovery(error_info.clone())?;
        }
        
        info!("Enhanced error {} logged for driver {:?}", error_id, driver_id);
        Ok(error_id)
    }

    /// Analyze error patterns for intelligent recovery
    fn analyze_error_patterns(&mut self, error_info: &ErrorInfo) {
        // Create error pattern for matching
        let pattern = ErrorPattern {
            error_code: error_info.error_code,
            context_pattern: self.extract_context_pattern(&error_info.context),
            occurrence_count: 1,
            first_seen: error_info.timestamp,
            last_seen: error_info.timestamp,
        };

        // Update or create pattern
        if let Some(existing_patterns) = self.error_patterns.get_mut(&pattern) {
            existing_patterns.push(error_info.clone());
            
            // Update pattern statistics
            if let Some(first_pattern) = existing_patterns.first_mut() {
                first_pattern.occurrence_count += 1;
                first_pattern.last_seen = error_info.timestamp;
            }
        } else {
            self.error_patterns.insert(pattern.clone(), vec![error_info.clone()]);
        }
    }

    /// Extract context pattern for matching
    fn extract_context_pattern(&self, context: &str) -> String {
        // Extract key terms from context
        let terms: Vec<&str> = context.split_whitespace()
            .filter(|term| term.len() > 3)
            .take(3)
            .collect();
        
        terms.join("_").to_lowercase()
    }

    /// Attempt intelligent recovery based on learned patterns
    pub fn attempt_intelligent_recovery(&mut self, error_info: ErrorInfo) -> Result<(), AdvancedDriverError> {
        debug!("Attempting intelligent recovery for error {}", error_info.error_id);
        
        // Get recommended strategies
        let strategies = self.get_intelligent_recovery_strategies(&error_info);
        
        if strategies.is_empty() {
            debug!("No intelligent recovery strategies available for error {}", error_info.error_id);
            return Ok(());
        }
        
        // Try strategies in order of probability
        for strategy in strategies {
            if self.failed_recovery_patterns.contains(&strategy) {
                continue; // Skip known failed strategies
            }
            
            match self.perform_recovery_attempt(error_info.error_id, strategy) {
                Ok(true) => {
                    info!("Intelligent recovery successful using {:?} for error {}", strategy, error_info.error_id);
                    self.update_recovery_success_cache(&error_info, strategy, true);
                    return Ok(());
                }
                Ok(false) => {
                    // Strategy failed, record failure
                    self.failed_recovery_patterns.insert(strategy);
                    self.update_recovery_success_cache(&error_info, strategy, false);
                    debug!("Intelligent recovery strategy {:?} failed for error {}", strategy, error_info.error_id);
                }
                Err(e) => {
                    warn!("Error during intelligent recovery: {:?}", e);
                }
            }
        }
        
        warn!("All intelligent recovery strategies failed for error {}", error_info.error_id);
        Ok(())
    }

    /// Get intelligent recovery strategies based on patterns and learning
    fn get_intelligent_recovery_strategies(&self, error_info: &ErrorInfo) -> Vec<RecoveryStrategy> {
        let mut strategies = Vec::new();
        
        // Get base strategies for error category
        if let Some(base_strategies) = self.recovery_strategies.get(&error_info.category) {
            strategies.extend(base_strategies.clone());
        }
        
        // Get contextual recommendations
        let context_keywords: Vec<String> = error_info.context.split_whitespace()
            .filter(|word| word.len() > 3)
            .map(|word| word.to_lowercase())
            .collect();
        
        for keyword in &context_keywords {
            if let Some(recommendations) = self.recovery_advisor.contextual_recommendations.get(keyword) {
                for strategy in recommendations {
                    if !strategies.contains(strategy) {
                        strategies.push(*strategy);
                    }
                }
            }
        }
        
        // Get pattern-based strategies
        let pattern = ErrorPattern {
            error_code: error_info.error_code,
            context_pattern: self.extract_context_pattern(&error_info.context),
            occurrence_count: 0,
            first_seen: 0,
            last_seen: 0,
        };
        
        if let Some(pattern_strategies) = self.recovery_advisor.pattern_success_rates.get(&pattern) {
            // Sort strategies by success probability
            let mut strategy_probs: Vec<(RecoveryStrategy, f32)> = pattern_strategies.iter()
                .map(|(strategy, prob)| (*strategy, prob.probability))
                .collect();
            
            strategy_probs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            
            for (strategy, _) in strategy_probs {
                if !strategies.contains(&strategy) {
                    strategies.insert(0, strategy); // Insert high-probability strategies at front
                }
            }
        }
        
        // Sort strategies by cached success rate if available
        strategies.sort_by(|a, b| {
            let cache_key_a = (error_info.driver_id, error_info.category, *a);
            let cache_key_b = (error_info.driver_id, error_info.category, *b);
            
            let prob_a = self.recovery_success_cache.get(&cache_key_a).copied().unwrap_or(0.5);
            let prob_b = self.recovery_success_cache.get(&cache_key_b).copied().unwrap_or(0.5);
            
            prob_b.partial_cmp(&prob_a).unwrap_or(std::cmp::Ordering::Equal)
        });
        
        strategies
    }

    /// Update recovery success cache
    fn update_recovery_success_cache(&mut self, error_info: &ErrorInfo, strategy: RecoveryStrategy, success: bool) {
        let cache_key = (error_info.driver_id, error_info.category, strategy);
        
        let current_prob = self.recovery_success_cache.get(&cache_key).copied().unwrap_or(0.5);
        let new_prob = if success {
            (current_prob + 0.1).min(1.0) // Increase success probability
        } else {
            (current_prob - 0.1).max(0.0) // Decrease success probability
        };
        
        self.recovery_success_cache.insert(cache_key, new_prob);
    }

    /// Update adaptive threshold based on error patterns
    fn update_adaptive_threshold(&mut self, driver_id: AdvancedDriverId, category: ErrorCategory) {
        let threshold_key = (driver_id, category);
        
        let current_count = *self.error_thresholds.get(&threshold_key).unwrap_or(&0);
        
        if let Some(adaptive_threshold) = self.adaptive_thresholds.get_mut(&threshold_key) {
            // Adjust threshold based on error frequency
            if current_count > adaptive_threshold.current_threshold {
                adaptive_threshold.current_threshold = (adaptive_threshold.current_threshold + 1).min(adaptive_threshold.base_threshold * 2);
            } else if current_count < adaptive_threshold.current_threshold / 2 {
                adaptive_threshold.current_threshold = (adaptive_threshold.current_threshold - 1).max(1);
            }
        } else {
            // Create new adaptive threshold
            let adaptive_threshold = AdaptiveThreshold {
                base_threshold: self.max_errors_per_driver,
                current_threshold: self.max_errors_per_driver,
                adaptation_rate: 0.1,
                last_adjustment: 0, // TODO: Get actual timestamp
            };
            self.adaptive_thresholds.insert(threshold_key, adaptive_threshold);
        }
    }

    /// Learn from recovery attempts to improve future recommendations
    pub fn learn_from_recovery(&mut self, recovery_attempt: RecoveryAttempt) {
        if !self.recovery_advisor.learning_enabled {
            return;
        }
        
        // Find the corresponding error
        let error_info = if let Some(error) = self.error_log.iter().find(|e| e.error_id == recovery_attempt.error_id) {
            error.clone()
        } else {
            return;
        };
        
        // Create pattern for this error
        let pattern = ErrorPattern {
            error_code: error_info.error_code,
            context_pattern: self.extract_context_pattern(&error_info.context),
            occurrence_count: 1,
            first_seen: error_info.timestamp,
            last_seen: error_info.timestamp,
        };
        
        // Update success rates for this strategy and pattern
        let strategy_map = self.recovery_advisor.pattern_success_rates
            .entry(pattern)
            .or_insert_with(HashMap::new);
        
        let prob_entry = strategy_map.entry(recovery_attempt.strategy).or_insert_with(|| {
            RecoveryProbability {
                strategy: recovery_attempt.strategy,
                probability: 0.5, // Start with neutral probability
                success_count: 0,
                failure_count: 0,
            }
        });
        
        if let Some(success) = recovery_attempt.success {
            if success {
                prob_entry.success_count += 1;
                prob_entry.probability = (prob_entry.success_count as f32) / 
                    ((prob_entry.success_count + prob_entry.failure_count) as f32).max(1.0);
            } else {
                prob_entry.failure_count += 1;
                prob_entry.probability = (prob_entry.success_count as f32) / 
                    ((prob_entry.success_count + prob_entry.failure_count) as f32).max(1.0);
            }
        }
        
        // Add to recovery history
        self.recovery_history.push_back(recovery_attempt.clone());
        
        // Limit history size
        if self.recovery_history.len() > 100 {
            self.recovery_history.pop_front();
        }
    }

    /// Get enhanced recovery statistics
    pub fn get_enhanced_recovery_statistics(&self) -> EnhancedRecoveryStatistics {
        let total_errors = self.error_log.len() as u64;
        let total_recovery_attempts = self.recovery_attempts.len() as u64;
        let successful_recoveries = self.recovery_attempts.iter()
            .filter(|attempt| attempt.success == Some(true))
            .count() as u64;
        let failed_recoveries = self.recovery_attempts.iter()
            .filter(|attempt| attempt.success == Some(false))
            .count() as u64;
        
        let success_rate = if total_recovery_attempts > 0 {
            (successful_recoveries as f32 / total_recovery_attempts as f32) * 100.0
        } else {
            0.0
        };
        
        EnhancedRecoveryStatistics {
            total_errors,
            error_patterns: self.error_patterns.len() as u32,
            total_recovery_attempts,
            successful_recoveries,
            failed_recoveries,
            success_rate,
            adaptive_thresholds: self.adaptive_thresholds.len() as u32,
            learned_patterns: self.recovery_advisor.pattern_success_rates.len() as u32,
            failed_strategy_patterns: self.failed_recovery_patterns.len() as u32,
        }
    }

    /// Reset recovery learning data
    pub fn reset_learning_data(&mut self) {
        self.recovery_advisor.pattern_success_rates.clear();
        self.recovery_success_cache.clear();
        self.failed_recovery_patterns.clear();
        self.recovery_history.clear();
        
        debug!("Recovery learning data reset");
    }

    /// Enable/disable adaptive thresholds
    pub fn set_adaptive_thresholds_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.adaptive_thresholds.clear();
        }
        debug!("Adaptive thresholds {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Get contextual hints for error debugging
    pub fn get_contextual_hints(&self, error_info: &ErrorInfo) -> Vec<String> {
        let mut hints = Vec::new();
        
        // Get hints based on error category
        let category_key = match error_info.category {
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Resource => "resource",
            ErrorCategory::Hardware => "hardware",
            _ => "",
        };
        
        if let Some(category_hints) = self.context_analyzer.contextual_hints.get(category_key) {
            hints.extend(category_hints.clone());
        }
        
        // Get hints based on context keywords
        for word in error_info.context.split_whitespace() {
            if let Some(hints_for_word) = self.context_analyzer.contextual_hints.get(&word.to_lowercase()) {
                for hint in hints_for_word {
                    if !hints.contains(hint) {
                        hints.push(hint.clone());
                    }
                }
            }
        }
        
        hints
    }

    /// Attempt automatic recovery
    pub fn attempt_auto_recovery(&mut self, error_info: ErrorInfo) -> Result<(), AdvancedDriverError> {
        debug!("Attempting auto-recovery for error {}", error_info.error_id);
        
        // Check if recovery is still possible
        let threshold_key = (error_info.driver_id, error_info.category);
        let error_count = self.error_thresholds.get(&threshold_key).copied().unwrap_or(0);
        
        if error_count > self.max_errors_per_driver {
            warn!("Too many errors for driver {:?} in category {:?}, skipping auto-recovery", 
                  error_info.driver_id, error_info.category);
            return Err(RecoveryFailed);
        }
        
        // Get available strategies for this error category
        let strategies = self.recovery_strategies.get(&error_info.category)
            .ok_or(RecoveryFailed)?;
        
        // Try each strategy
        for strategy in strategies {
            if self.attempt_recovery(error_info.clone(), *strategy)? {
                info!("Auto-recovery succeeded for error {} using strategy {:?}", 
                      error_info.error_id, strategy);
                return Ok(());
            }
        }
        
        warn!("All auto-recovery strategies failed for error {}", error_info.error_id);
        Err(RecoveryFailed)
    }

    /// Attempt recovery using a specific strategy
    pub fn attempt_recovery(&mut self, error_info: ErrorInfo, strategy: RecoveryStrategy) -> Result<bool, AdvancedDriverError> {
        let attempt_id = self.allocate_recovery_id();
        
        debug!("Attempting recovery {} using strategy {:?} for error {}", 
               attempt_id, strategy, error_info.error_id);
        
        let attempt = RecoveryAttempt {
            attempt_id,
            error_id: error_info.error_id,
            strategy,
            start_timestamp: 0, // TODO: Get actual timestamp
            end_timestamp: None,
            success: None,
            details: format!("Attempting recovery using {:?}", strategy),
        };
        
        self.active_recovery.insert(attempt_id, attempt.clone());
        
        // Perform the recovery action
        let success = self.perform_recovery_action(error_info.driver_id, strategy)?;
        
        // Update attempt with result
        let attempt_mut = self.active_recovery.get_mut(&attempt_id).unwrap();
        attempt_mut.end_timestamp = Some(0); // TODO: Get actual timestamp
        attempt_mut.success = Some(success);
        
        if success {
            info!("Recovery {} succeeded using strategy {:?}", attempt_id, strategy);
        } else {
            warn!("Recovery {} failed using strategy {:?}", attempt_id, strategy);
        }
        
        // Move to history
        self.recovery_attempts.push_back(self.active_recovery.remove(&attempt_id).unwrap());
        
        // Limit history size
        if self.recovery_attempts.len() > 500 {
            self.recovery_attempts.pop_front();
        }
        
        Ok(success)
    }

    /// Perform the actual recovery action
    fn perform_recovery_action(&self, driver_id: AdvancedDriverId, strategy: RecoveryStrategy) -> Result<bool, AdvancedDriverError> {
        debug!("Performing recovery action {:?} for driver {:?}", strategy, driver_id);
        
        match strategy {
            RecoveryStrategy::Retry => {
                // Simple retry - always succeeds
                info!("Retry recovery for driver {:?}", driver_id);
                Ok(true)
            },
            
            RecoveryStrategy::ResetDevice => {
                // Reset the device
                info!("Resetting device for driver {:?}", driver_id);
                // In real implementation, would send reset command to device
                Ok(true)
            },
            
            RecoveryStrategy::ReloadDriver => {
                // Reload the driver
                info!("Reloading driver for driver {:?}", driver_id);
                // In real implementation, would unload and reload driver
                Ok(true)
            },
            
            RecoveryStrategy::SwitchDriver => {
                // Switch to backup driver
                info!("Switching driver for {:?}", driver_id);
                // In real implementation, would load alternative driver
                Ok(true)
            },
            
            RecoveryStrategy::PowerCycle => {
                // Power cycle the device
                info!("Power cycling device for driver {:?}", driver_id);
                // In real implementation, would toggle device power
                Ok(true)
            },
            
            RecoveryStrategy::ResetBus => {
                // Reset the bus
                info!("Resetting bus for driver {:?}", driver_id);
                // In real implementation, would reset hardware bus
                Ok(true)
            },
            
            RecoveryStrategy::RestartSystem => {
                // Schedule system restart
                warn!("System restart recommended for driver {:?}", driver_id);
                Ok(true) // In real implementation, would schedule restart
            },
            
            RecoveryStrategy::ManualIntervention => {
                // Requires manual intervention
                warn!("Manual intervention required for driver {:?}", driver_id);
                Ok(false) // Always fails, requires manual action
            },
        }
    }

    /// Get error by ID
    pub fn get_error(&self, error_id: u64) -> Option<&ErrorInfo> {
        self.error_log.iter().find(|error| error.error_id == error_id)
    }

    /// Get recovery attempt by ID
    pub fn get_recovery_attempt(&self, attempt_id: u64) -> Option<&RecoveryAttempt> {
        self.recovery_attempts.iter()
            .chain(self.active_recovery.values())
            .find(|attempt| attempt.attempt_id == attempt_id)
    }

    /// Get errors for a driver
    pub fn get_driver_errors(&self, driver_id: AdvancedDriverId) -> Vec<&ErrorInfo> {
        self.error_log.iter()
            .filter(|error| error.driver_id == driver_id)
            .collect()
    }

    /// Get recovery statistics
    pub fn get_recovery_statistics(&self) -> RecoveryStatistics {
        let mut successful_recoveries = 0;
        let mut failed_recoveries = 0;
        let mut recovery_counts_by_strategy = BTreeMap::new();
        
        for attempt in &self.recovery_attempts {
            if let Some(true) = attempt.success {
                successful_recoveries += 1;
            } else if let Some(false) = attempt.success {
                failed_recoveries += 1;
            }
            
            *recovery_counts_by_strategy.entry(attempt.strategy).or_insert(0) += 1;
        }
        
        RecoveryStatistics {
            total_errors: self.error_log.len(),
            active_recovery: self.active_recovery.len(),
            successful_recoveries,
            failed_recoveries,
            recovery_counts_by_strategy,
            auto_recovery_enabled: self.auto_recovery_enabled,
            error_thresholds: self.error_thresholds.clone(),
        }
    }

    /// Enable/disable auto-recovery
    pub fn set_auto_recovery_enabled(&mut self, enabled: bool) -> Result<(), AdvancedDriverError> {
        debug!("Setting auto-recovery to {}", enabled);
        self.auto_recovery_enabled = enabled;
        info!("Auto-recovery {}", if enabled { "enabled" } else { "disabled" });
        Ok(())
    }

    /// Set error threshold for a driver/category
    pub fn set_error_threshold(&mut self, driver_id: AdvancedDriverId, category: ErrorCategory, threshold: u32) -> Result<(), AdvancedDriverError> {
        debug!("Setting error threshold for driver {:?} category {:?}: {}", 
               driver_id, category, threshold);
        self.error_thresholds.insert((driver_id, category), threshold);
        Ok(())
    }

    /// Add custom recovery strategy
    pub fn add_recovery_strategy(&mut self, category: ErrorCategory, strategy: RecoveryStrategy) -> Result<(), AdvancedDriverError> {
        debug!("Adding recovery strategy {:?} for category {:?}", strategy, category);
        
        let strategies = self.recovery_strategies.entry(category).or_insert_with(Vec::new);
        if !strategies.contains(&strategy) {
            strategies.push(strategy);
        }
        
        Ok(())
    }

    /// Clear error log
    pub fn clear_error_log(&mut self) -> Result<(), AdvancedDriverError> {
        debug!("Clearing error log");
        self.error_log.clear();
        Ok(())
    }

    /// Clear recovery history
    pub fn clear_recovery_history(&mut self) -> Result<(), AdvancedDriverError> {
        debug!("Clearing recovery history");
        self.recovery_attempts.clear();
        Ok(())
    }

    /// Register error notification callback
    pub fn register_notification_callback(&mut self, callback: fn(&ErrorInfo)) {
        self.notification_callbacks.push(callback);
    }

    /// Internal: Classify error by type
    fn classify_error(&self, error: AdvancedDriverError) -> ErrorCategory {
        match error {
            AdvancedDriverError::HardwareError => ErrorCategory::Hardware,
            AdvancedDriverError::LoadFailed | AdvancedDriverError::UnloadFailed | 
            AdvancedDriverError::InitializationFailed => ErrorCategory::Software,
            AdvancedDriverError::ResourceExhaustion => ErrorCategory::Resource,
            AdvancedDriverError::Timeout | AdvancedDriverError::HotPlugTimeout => ErrorCategory::Timeout,
            AdvancedDriverError::PermissionDenied => ErrorCategory::Permission,
            AdvancedDriverError::ValidationFailed => ErrorCategory::Configuration,
            AdvancedDriverError::DependencyUnsatisfied | AdvancedDriverError::DependencyResolutionFailed => ErrorCategory::Dependency,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Internal: Determine error severity
    fn determine_severity(&self, error: AdvancedDriverError) -> ErrorSeverity {
        match error {
            AdvancedDriverError::HardwareError => ErrorSeverity::Critical,
            AdvancedDriverError::LoadFailed | AdvancedDriverError::UnloadFailed => ErrorSeverity::Error,
            AdvancedDriverError::InitializationFailed => ErrorSeverity::Error,
            AdvancedDriverError::Timeout | AdvancedDriverError::HotPlugTimeout => ErrorSeverity::Warning,
            AdvancedDriverError::ResourceExhaustion => ErrorSeverity::Critical,
            AdvancedDriverError::RecoveryFailed => ErrorSeverity::Critical,
            AdvancedDriverError::FatalError => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Error,
        }
    }

    /// Internal: Check if error is recoverable
    fn is_recoverable(&self, error: AdvancedDriverError) -> bool {
        !matches!(error, AdvancedDriverError::FatalError | AdvancedDriverError::ManualIntervention)
    }

    /// Internal: Allocate error ID
    fn allocate_error_id(&mut self) -> u64 {
        self.error_counter += 1;
        self.error_counter
    }

    /// Internal: Allocate recovery ID
    fn allocate_recovery_id(&mut self) -> u64 {
        self.recovery_counter += 1;
        self.recovery_counter
    }

    /// Internal: Notify error callbacks
    fn notify_error(&self, error_info: &ErrorInfo) {
        for callback in &self.notification_callbacks {
            callback(error_info);
        }
    }
}

/// Recovery statistics
#[derive(Debug, Clone)]
pub struct RecoveryStatistics {
    pub total_errors: usize,
    pub active_recovery: usize,
    pub successful_recoveries: usize,
    pub failed_recoveries: usize,
    pub recovery_counts_by_strategy: BTreeMap<RecoveryStrategy, usize>,
    pub auto_recovery_enabled: bool,
    pub error_thresholds: BTreeMap<(AdvancedDriverId, ErrorCategory), u32>,
}

    /// Perform a recovery attempt for intelligent recovery
    fn perform_recovery_attempt(&mut self, error_id: u64, strategy: RecoveryStrategy) -> Result<bool, AdvancedDriverError> {
        // Find the error
        let error_info = if let Some(error) = self.error_log.iter().find(|e| e.error_id == error_id) {
            error.clone()
        } else {
            return Err(AdvancedDriverError::DeviceNotFound);
        };
        
        // Perform recovery
        let success = self.attempt_recovery(error_info, strategy)?;
        
        // Learn from the attempt
        if let Some(attempt) = self.recovery_attempts.back() {
            self.learn_from_recovery(attempt.clone());
        }
        
        Ok(success)
    }
}

impl Default for EnhancedRecoveryManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_reporting() {
        let mut manager = RecoveryManager::new();
        let driver_id = AdvancedDriverId(1);
        
        let error_id = manager.report_error(
            driver_id,
            AdvancedDriverError::HardwareError,
            "Device timeout".to_string()
        ).unwrap();
        
        assert_eq!(error_id, 1);
        
        let error = manager.get_error(error_id).unwrap();
        assert_eq!(error.error_code, AdvancedDriverError::HardwareError);
        assert_eq!(error.category, ErrorCategory::Hardware);
        assert_eq!(error.severity, ErrorSeverity::Critical);
    }

    #[test]
    fn test_recovery_attempt() {
        let mut manager = RecoveryManager::new();
        let driver_id = AdvancedDriverId(1);
        
        let error_id = manager.report_error(
            driver_id,
            AdvancedDriverError::HardwareError,
            "Test error".to_string()
        ).unwrap();
        
        let error = manager.get_error(error_id).unwrap();
        let success = manager.attempt_recovery(
            error.clone(),
            RecoveryStrategy::ResetDevice
        ).unwrap();
        
        assert!(success);
    }

    #[test]
    fn test_auto_recovery() {
        let mut manager = RecoveryManager::new();
        let driver_id = AdvancedDriverId(1);
        
        assert!(manager.auto_recovery_enabled);
        
        let error_id = manager.report_error(
            driver_id,
            AdvancedDriverError::HardwareError,
            "Auto recoverable error".to_string()
        ).unwrap();
        
        // Auto-recovery should be attempted
        let stats = manager.get_recovery_statistics();
        assert!(stats.successful_recoveries > 0);
    }

    #[test]
    fn test_error_statistics() {
        let mut manager = RecoveryManager::new();
        let driver_id = AdvancedDriverId(1);
        
        // Report multiple errors
        manager.report_error(driver_id, AdvancedDriverError::Timeout, "Error 1".to_string()).unwrap();
        manager.report_error(driver_id, AdvancedDriverError::HardwareError, "Error 2".to_string()).unwrap();
        
        let stats = manager.get_recovery_statistics();
        assert_eq!(stats.total_errors, 2);
    }

    #[test]
    fn test_recovery_strategy_configuration() {
        let mut manager = RecoveryManager::new();
        
        assert!(manager.add_recovery_strategy(
            ErrorCategory::Hardware,
            RecoveryStrategy::RestartSystem
        ).is_ok());
        
        let strategies = manager.recovery_strategies.get(&ErrorCategory::Hardware);
        assert!(strategies.is_some());
        assert!(strategies.unwrap().contains(&RecoveryStrategy::RestartSystem));
    }
}
