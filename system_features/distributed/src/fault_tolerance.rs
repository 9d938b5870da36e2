//! Fault tolerance and recovery mechanisms
//!
//! This module provides comprehensive fault detection, recovery, and
//! resilience mechanisms for distributed computing systems.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc, oneshot, RwLock};
use tokio::time::{interval, timeout};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::cluster::{Cluster, NodeId, NodeStatus};
use crate::common::{TaskId, TaskResult, ResourceInfo};
use crate::scheduler::{DistributedScheduler, TaskStatus};

/// Types of faults that can occur in distributed systems
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FaultType {
    /// Node failure or crash
    NodeFailure,
    /// Network partition or communication failure
    NetworkPartition,
    /// Message loss or corruption
    MessageLoss,
    /// Task execution timeout
    TaskTimeout,
    /// Resource exhaustion
    ResourceExhaustion,
    /// Data corruption
    DataCorruption,
    /// Performance degradation
    PerformanceDegradation,
    /// Configuration error
    ConfigurationError,
    /// Security breach
    SecurityBreach,
}

/// Fault severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultSeverity {
    /// Informational - system operating normally
    Info,
    /// Warning - potential issue detected
    Warning,
    /// Minor - some functionality affected
    Minor,
    /// Major - significant functionality impacted
    Major,
    /// Critical - system functionality severely impacted
    Critical,
    /// Fatal - system no longer operational
    Fatal,
}

/// Representation of a detected fault
#[derive(Debug, Clone)]
pub struct DetectedFault {
    pub fault_id: Uuid,
    pub fault_type: FaultType,
    pub severity: FaultSeverity,
    pub affected_nodes: Vec<NodeId>,
    pub affected_tasks: Vec<TaskId>,
    pub detection_time: SystemTime,
    pub description: String,
    pub recovery_suggestions: Vec<RecoveryAction>,
    pub metadata: HashMap<String, String>,
}

/// Recovery actions that can be taken to resolve faults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecoveryAction {
    /// Restart failed processes or tasks
    RestartProcesses { task_ids: Vec<TaskId>, node_ids: Vec<NodeId> },
    /// Reassign tasks to healthy nodes
    ReassignTasks { task_ids: Vec<TaskId>, target_nodes: Vec<NodeId> },
    /// Scale up or down cluster resources
    ScaleCluster { add_nodes: usize, remove_nodes: Vec<NodeId> },
    /// Switch to backup/replica systems
    ActivateReplicas { affected_services: Vec<String> },
    /// Reduce system load or throttle operations
    LoadShedding { max_concurrent_tasks: usize },
    /// Retry failed operations
    RetryOperations { operation_ids: Vec<Uuid>, max_retries: u32 },
    /// Rollback to previous stable state
    Rollback { checkpoint_id: Uuid },
    /// Apply configuration fixes
    ApplyConfiguration { config_updates: HashMap<String, String> },
    /// Trigger manual intervention
    ManualIntervention { instructions: String },
    /// Wait and monitor for self-recovery
    WaitAndMonitor { timeout: Duration, check_interval: Duration },
}

/// Fault detection strategy
#[derive(Debug, Clone)]
pub struct FaultDetectionStrategy {
    pub heartbeat_timeout: Duration,
    pub task_timeout: Duration,
    pub performance_threshold: f64,
    pub resource_threshold: f64,
    pub network_latency_threshold: Duration,
    pub error_rate_threshold: f64,
}

/// Main fault detection service
pub struct FaultDetector {
    cluster: Arc<Cluster>,
    scheduler: Arc<DistributedScheduler>,
    detection_strategy: FaultDetectionStrategy,
    
    // Fault tracking
    active_faults: Arc<RwLock<HashMap<Uuid, DetectedFault>>>,
    fault_history: Arc<RwLock<Vec<DetectedFault>>>,
    node_health_status: Arc<RwLock<HashMap<NodeId, NodeHealthStatus>>>,
    
    // Monitoring state
    last_heartbeat_check: Arc<RwLock<SystemTime>>,
    suspicious_nodes: Arc<RwLock<HashSet<NodeId>>>,
    
    // Statistics
    detection_statistics: Arc<RwLock<FaultDetectionStatistics>>,
    
    // Control channels
    fault_events_tx: broadcast::Sender<FaultEvent>,
}

/// Node health monitoring status
#[derive(Debug, Clone)]
pub struct NodeHealthStatus {
    pub node_id: NodeId,
    pub last_heartbeat: SystemTime,
    pub consecutive_failures: u32,
    pub performance_score: f64,
    pub resource_utilization: HashMap<String, f64>,
    pub active_tasks: Vec<TaskId>,
    pub health_score: f64,
    pub is_suspicious: bool,
    pub last_recovery_attempt: Option<SystemTime>,
}

/// Fault detection events
#[derive(Debug, Clone)]
pub enum FaultEvent {
    /// New fault detected
    FaultDetected(DetectedFault),
    /// Fault resolved
    FaultResolved(Uuid, SystemTime),
    /// Node marked as failed
    NodeFailed(NodeId, DetectedFault),
    /// Recovery action initiated
    RecoveryInitiated(RecoveryAction),
    /// Recovery completed
    RecoveryCompleted(Uuid, bool),
    /// Cluster health degraded
    ClusterHealthDegraded(f64, Vec<NodeId>),
}

/// Recovery management service
pub struct RecoveryManager {
    cluster: Arc<Cluster>,
    scheduler: Arc<DistributedScheduler>,
    fault_detector: Arc<FaultDetector>,
    
    // Recovery state
    active_recoveries: Arc<RwLock<HashMap<Uuid, RecoveryOperation>>>,
    recovery_queue: Arc<RwLock<VecDeque<RecoveryOperation>>>,
    recovery_history: Arc<RwLock<Vec<RecoveryOperation>>>,
    
    // Backup and replication
    checkpoint_manager: Arc<CheckpointManager>,
    replication_manager: Arc<ReplicationManager>,
    
    // Recovery policies
    recovery_policies: Arc<RwLock<RecoveryPolicies>>,
    
    // Statistics
    recovery_statistics: Arc<RwLock<RecoveryStatistics>>,
    
    // Control channels
    recovery_events_tx: broadcast::Sender<RecoveryEvent>,
}

/// Individual recovery operation
#[derive(Debug, Clone)]
pub struct RecoveryOperation {
    pub operation_id: Uuid,
    pub fault_id: Uuid,
    pub recovery_actions: Vec<RecoveryAction>,
    pub assigned_to: NodeId,
    pub start_time: SystemTime,
    pub estimated_duration: Duration,
    pub status: RecoveryStatus,
    pub progress: f64,
    pub attempts: u32,
    pub max_attempts: u32,
    pub rollback_actions: Vec<RecoveryAction>,
}

/// Recovery operation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryStatus {
    Pending,
    Running,
    Completed,
    Failed,
    RolledBack,
    Cancelled,
}

/// Recovery events
#[derive(Debug, Clone)]
pub enum RecoveryEvent {
    RecoveryStarted(Uuid, RecoveryAction),
    RecoveryProgress(Uuid, f64),
    RecoveryCompleted(Uuid, bool),
    RecoveryFailed(Uuid, String),
    RollbackInitiated(Uuid, Uuid),
    ClusterRecovered(SystemTime),
}

/// Backup and checkpoint management
pub struct CheckpointManager {
    cluster: Arc<Cluster>,
    checkpoints: Arc<RwLock<HashMap<Uuid, Checkpoint>>>,
    max_checkpoints: usize,
    auto_checkpoint_interval: Duration,
}

/// Data checkpoint representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    pub checkpoint_id: Uuid,
    pub creation_time: SystemTime,
    pub node_states: HashMap<NodeId, NodeState>,
    pub task_states: HashMap<TaskId, TaskState>,
    pub cluster_configuration: ClusterConfiguration,
    pub data_checksums: HashMap<String, String>,
    pub metadata: HashMap<String, String>,
}

/// Node state at checkpoint time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeState {
    pub node_id: NodeId,
    pub resource_info: ResourceInfo,
    pub active_tasks: Vec<TaskId>,
    pub system_load: f64,
    pub network_connectivity: HashMap<NodeId, bool>,
    pub local_data: HashMap<String, Vec<u8>>,
}

/// Task state at checkpoint time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskState {
    pub task_id: TaskId,
    pub status: TaskStatus,
    pub progress: f64,
    pub intermediate_data: Vec<u8>,
    pub execution_history: Vec<TaskExecutionEvent>,
}

/// Cluster configuration at checkpoint time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfiguration {
    pub cluster_id: Uuid,
    pub active_nodes: Vec<NodeId>,
    pub scheduler_config: crate::scheduler::SchedulerConfig,
    pub resource_limits: HashMap<NodeId, ResourceInfo>,
}

/// Task execution event for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskExecutionEvent {
    pub timestamp: SystemTime,
    pub event_type: String,
    pub node_id: NodeId,
    pub details: HashMap<String, String>,
}

/// Replication management for fault tolerance
pub struct ReplicationManager {
    cluster: Arc<Cluster>,
    replication_groups: Arc<RwLock<HashMap<String, ReplicationGroup>>>,
    replication_factor: usize,
}

/// Replication group configuration
#[derive(Debug, Clone)]
pub struct ReplicationGroup {
    pub group_id: String,
    pub primary_node: NodeId,
    pub replica_nodes: Vec<NodeId>,
    pub replicated_data: HashMap<String, Vec<u8>>,
    pub consistency_model: crate::shared_memory::ConsistencyModel,
}

/// Recovery policy configuration
#[derive(Debug, Clone)]
pub struct RecoveryPolicies {
    pub auto_recovery_enabled: bool,
    pub max_concurrent_recoveries: usize,
    pub recovery_timeout: Duration,
    pub rollback_enabled: bool,
    pub checkpoint_retention_days: u32,
    pub aggressive_failure_detection: bool,
    pub isolation_timeout: Duration,
}

/// Fault detection statistics
#[derive(Debug, Clone, Default)]
pub struct FaultDetectionStatistics {
    pub total_faults_detected: u64,
    pub faults_by_type: HashMap<FaultType, u64>,
    pub faults_by_severity: HashMap<FaultSeverity, u64>,
    pub average_detection_time: Duration,
    pub false_positive_rate: f64,
    pub missed_fault_rate: f64,
    pub node_failure_rate: f64,
}

/// Recovery statistics
#[derive(Debug, Clone, Default)]
pub struct RecoveryStatistics {
    pub total_recoveries_initiated: u64,
    pub successful_recoveries: u64,
    pub failed_recoveries: u64,
    pub average_recovery_time: Duration,
    pub recovery_success_rate: f64,
    pub rollback_frequency: u64,
    pub data_loss_incidents: u64,
    pub downtime_total: Duration,
}

impl FaultDetector {
    /// Create a new fault detector
    pub fn new(
        cluster: Arc<Cluster>,
        scheduler: Arc<DistributedScheduler>,
        detection_strategy: Option<FaultDetectionStrategy>,
    ) -> Self {
        let strategy = detection_strategy.unwrap_or_default();
        
        info!("Initializing fault detection service");
        
        Self {
            cluster,
            scheduler,
            detection_strategy: strategy.clone(),
            active_faults: Arc::new(RwLock::new(HashMap::new())),
            fault_history: Arc::new(RwLock::new(Vec::new())),
            node_health_status: Arc::new(RwLock::new(HashMap::new())),
            last_heartbeat_check: Arc::new(RwLock::new(SystemTime::now())),
            suspicious_nodes: Arc::new(RwLock::new(HashSet::new())),
            detection_statistics: Arc::new(RwLock::new(FaultDetectionStatistics::default())),
            fault_events_tx: broadcast::channel(1000).0,
        }
    }
    
    /// Start fault detection monitoring
    pub async fn start(&self) -> Result<()> {
        info!("Starting fault detection monitoring");
        
        // Start heartbeat monitoring
        let detector = self.clone();
        tokio::spawn(async move {
            detector.heartbeat_monitoring_loop().await;
        });
        
        // Start task monitoring
        let detector = self.clone();
        tokio::spawn(async move {
            detector.task_monitoring_loop().await;
        });
        
        // Start performance monitoring
        let detector = self.clone();
        tokio::spawn(async move {
            detector.performance_monitoring_loop().await;
        });
        
        // Start network monitoring
        let detector = self.clone();
        tokio::spawn(async move {
            detector.network_monitoring_loop().await;
        });
        
        info!("Fault detection monitoring started");
        Ok(())
    }
    
    /// Stop fault detection
    pub async fn stop(&self) -> Result<()> {
        info!("Stopping fault detection monitoring");
        Ok(())
    }
    
    /// Heartbeat monitoring loop
    async fn heartbeat_monitoring_loop(self) {
        let mut interval = interval(Duration::from_secs(1));
        
        loop {
            interval.tick().await;
            
            if let Err(e) = self.check_heartbeats().await {
                error!("Error checking heartbeats: {}", e);
            }
            
            if let Err(e) = self.update_node_health_scores().await {
                error!("Error updating node health scores: {}", e);
            }
        }
    }
    
    /// Task monitoring loop
    async fn task_monitoring_loop(self) {
        let mut interval = interval(Duration::from_secs(5));
        
        loop {
            interval.tick().await;
            
            if let Err(e) = self.check_task_health().await {
                error!("Error checking task health: {}", e);
            }
        }
    }
    
    /// Performance monitoring loop
    async fn performance_monitoring_loop(self) {
        let mut interval = interval(Duration::from_secs(10));
        
        loop {
            interval.tick().await;
            
            if let Err(e) = self.check_performance_degradation().await {
                error!("Error checking performance: {}", e);
            }
        }
    }
    
    /// Network monitoring loop
    async fn network_monitoring_loop(self) {
        let mut interval = interval(Duration::from_secs(15));
        
        loop {
            interval.tick().await;
            
            if let Err(e) = self.check_network_health().await {
                error!("Error checking network health: {}", e);
            }
        }
    }
    
    /// Check heartbeats from all cluster nodes
    async fn check_heartbeats(&self) -> Result<()> {
        let cluster_status = self.cluster.get_status().await?;
        let current_time = SystemTime::now();
        
        let nodes = self.cluster.get_nodes_by_status(NodeStatus::Active).await?;
        
        for node in nodes {
            let time_since_heartbeat = current_time.duration_since(node.last_seen)
                .unwrap_or(Duration::from_secs(0));
            
            let mut health_status = self.node_health_status.read().await
                .get(&node.id)
                .cloned()
                .unwrap_or_else(|| NodeHealthStatus {
                    node_id: node.id,
                    last_heartbeat: node.last_seen,
                    consecutive_failures: 0,
                    performance_score: 1.0,
                    resource_utilization: HashMap::new(),
                    active_tasks: vec![],
                    health_score: 1.0,
                    is_suspicious: false,
                    last_recovery_attempt: None,
                });
            
            // Update last heartbeat
            health_status.last_heartbeat = node.last_seen;
            
            // Check for heartbeat timeout
            if time_since_heartbeat > self.detection_strategy.heartbeat_timeout {
                health_status.consecutive_failures += 1;
                
                if health_status.consecutive_failures >= 3 {
                    // Mark as failed
                    let fault = DetectedFault {
                        fault_id: Uuid::new_v4(),
                        fault_type: FaultType::NodeFailure,
                        severity: FaultSeverity::Critical,
                        affected_nodes: vec![node.id],
                        affected_tasks: vec![],
                        detection_time: current_time,
                        description: format!("Node {} missed {} heartbeats", node.id, health_status.consecutive_failures),
                        recovery_suggestions: vec![
                            RecoveryAction::RestartProcesses { task_ids: health_status.active_tasks.clone(), node_ids: vec![node.id] },
                            RecoveryAction::ReassignTasks { task_ids: health_status.active_tasks.clone(), target_nodes: vec![] },
                        ],
                        metadata: HashMap::new(),
                    };
                    
                    self.handle_detected_fault(fault).await?;
                }
            } else {
                // Reset failure count if heartbeat received
                health_status.consecutive_failures = 0;
            }
            
            // Update health status
            {
                let mut status_map = self.node_health_status.write().await;
                status_map.insert(node.id, health_status);
            }
        }
        
        Ok(())
    }
    
    /// Update health scores for all nodes
    async fn update_node_health_scores(&self) -> Result<()> {
        let mut status_map = self.node_health_status.write().await;
        
        for health_status in status_map.values_mut() {
            // Calculate health score based on various factors
            let mut health_score = 1.0;
            
            // Factor in consecutive failures
            if health_status.consecutive_failures > 0 {
                health_score *= (0.9f64).powi(health_status.consecutive_failures as i32);
            }
            
            // Factor in performance score
            health_score *= health_status.performance_score;
            
            // Factor in resource utilization
            for utilization in health_status.resource_utilization.values() {
                if *utilization > 0.9 {
                    health_score *= 0.8;
                } else if *utilization > 0.7 {
                    health_score *= 0.9;
                }
            }
            
            health_status.health_score = health_score.clamp(0.0, 1.0);
            health_status.is_suspicious = health_score < 0.5;
        }
        
        Ok(())
    }
    
    /// Check health of running tasks
    async fn check_task_health(&self) -> Result<()> {
        // This would integrate with the scheduler to check task health
        // For now, it's a placeholder implementation
        
        let cluster_status = self.cluster.get_status().await?;
        
        // Check for timeout issues
        if cluster_status.average_load > 0.9 {
            let fault = DetectedFault {
                fault_id: Uuid::new_v4(),
                fault_type: FaultType::ResourceExhaustion,
                severity: FaultSeverity::Warning,
                affected_nodes: vec![],
                affected_tasks: vec![],
                detection_time: SystemTime::now(),
                description: "High cluster load detected".to_string(),
                recovery_suggestions: vec![
                    RecoveryAction::LoadShedding { max_concurrent_tasks: 50 },
                ],
                metadata: HashMap::new(),
            };
            
            self.handle_detected_fault(fault).await?;
        }
        
        Ok(())
    }
    
    /// Check for performance degradation
    async fn check_performance_degradation(&self) -> Result<()> {
        let cluster_status = self.cluster.get_status().await?;
        
        // Check average load
        if cluster_status.average_load > self.detection_strategy.performance_threshold {
            let fault = DetectedFault {
                fault_id: Uuid::new_v4(),
                fault_type: FaultType::PerformanceDegradation,
                severity: if cluster_status.average_load > 0.9 { FaultSeverity::Major } else { FaultSeverity::Minor },
                affected_nodes: vec![],
                affected_tasks: vec![],
                detection_time: SystemTime::now(),
                description: format!("Cluster performance degraded: load = {:.2}", cluster_status.average_load),
                recovery_suggestions: vec![
                    RecoveryAction::LoadShedding { max_concurrent_tasks: (cluster_status.total_nodes * 2) as usize },
                ],
                metadata: HashMap::new(),
            };
            
            self.handle_detected_fault(fault).await?;
        }
        
        Ok(())
    }
    
    /// Check network health
    async fn check_network_health(&self) -> Result<()> {
        // This would check network connectivity, latency, etc.
        // Placeholder implementation
        
        Ok(())
    }
    
    /// Handle a detected fault
    async fn handle_detected_fault(&self, fault: DetectedFault) -> Result<()> {
        debug!("Handling detected fault: {:?}", fault.fault_type);
        
        // Store fault
        {
            let mut active_faults = self.active_faults.write().await;
            active_faults.insert(fault.fault_id, fault.clone());
        }
        
        // Update statistics
        {
            let mut stats = self.detection_statistics.write().await;
            stats.total_faults_detected += 1;
            
            *stats.faults_by_type.entry(fault.fault_type.clone()).or_insert(0) += 1;
            *stats.faults_by_severity.entry(fault.severity).or_insert(0) += 1;
        }
        
        // Broadcast fault event
        let _ = self.fault_events_tx.send(FaultEvent::FaultDetected(fault));
        
        // Initiate recovery if configured
        // This would integrate with the recovery manager
        
        Ok(())
    }
    
    /// Get current fault status
    pub async fn get_active_faults(&self) -> Vec<DetectedFault> {
        let active_faults = self.active_faults.read().await;
        active_faults.values().cloned().collect()
    }
    
    /// Get detection statistics
    pub async fn get_statistics(&self) -> FaultDetectionStatistics {
        self.detection_statistics.read().await.clone()
    }
    
    /// Subscribe to fault events
    pub fn subscribe_events(&self) -> broadcast::Receiver<FaultEvent> {
        self.fault_events_tx.subscribe()
    }
    
    /// Mark fault as resolved
    pub async fn resolve_fault(&self, fault_id: Uuid) -> Result<()> {
        let current_time = SystemTime::now();
        
        // Remove from active faults
        {
            let mut active_faults = self.active_faults.write().await;
            active_faults.remove(&fault_id);
        }
        
        // Add to history
        {
            // Would retrieve fault details and add to history
            let fault_history = self.fault_history.read().await;
            if let Some(fault) = fault_history.iter().find(|f| f.fault_id == fault_id) {
                let mut history = self.fault_history.write().await;
                // Would update fault with resolution time
            }
        }
        
        // Broadcast resolution event
        let _ = self.fault_events_tx.send(FaultEvent::FaultResolved(fault_id, current_time));
        
        Ok(())
    }
    
    /// Check if node is healthy
    pub async fn is_node_healthy(&self, node_id: NodeId) -> bool {
        let status_map = self.node_health_status.read().await;
        if let Some(status) = status_map.get(&node_id) {
            status.health_score >= 0.5 && status.consecutive_failures < 3
        } else {
            false // Unknown nodes are considered unhealthy
        }
    }
    
    /// Get node health status
    pub async fn get_node_health(&self, node_id: NodeId) -> Option<NodeHealthStatus> {
        let status_map = self.node_health_status.read().await;
        status_map.get(&node_id).cloned()
    }
}

impl RecoveryManager {
    /// Create a new recovery manager
    pub fn new(
        cluster: Arc<Cluster>,
        scheduler: Arc<DistributedScheduler>,
        fault_detector: Arc<FaultDetector>,
    ) -> Self {
        info!("Initializing recovery manager");
        
        Self {
            cluster,
            scheduler,
            fault_detector,
            active_recoveries: Arc::new(RwLock::new(HashMap::new())),
            recovery_queue: Arc::new(RwLock::new(VecDeque::new())),
            recovery_history: Arc::new(RwLock::new(Vec::new())),
            checkpoint_manager: Arc::new(CheckpointManager::new(cluster.clone(), 10, Duration::from_secs(300))),
            replication_manager: Arc::new(ReplicationManager::new(cluster, 3)),
            recovery_policies: Arc::new(RwLock::new(RecoveryPolicies::default())),
            recovery_statistics: Arc::new(RwLock::new(RecoveryStatistics::default())),
            recovery_events_tx: broadcast::channel(1000).0,
        }
    }
    
    /// Start recovery manager
    pub async fn start(&self) -> Result<()> {
        info!("Starting recovery manager");
        
        // Start recovery processing loop
        let manager = self.clone();
        tokio::spawn(async move {
            manager.recovery_processing_loop().await;
        });
        
        // Start checkpoint manager
        self.checkpoint_manager.start().await?;
        
        info!("Recovery manager started");
        Ok(())
    }
    
    /// Stop recovery manager
    pub async fn stop(&self) -> Result<()> {
        info!("Stopping recovery manager");
        Ok(())
    }
    
    /// Recovery processing loop
    async fn recovery_processing_loop(self) {
        let mut interval = interval(Duration::from_secs(1));
        
        loop {
            interval.tick().await;
            
            // Process recovery queue
            if let Err(e) = self.process_recovery_queue().await {
                error!("Error processing recovery queue: {}", e);
            }
            
            // Monitor active recoveries
            if let Err(e) = self.monitor_active_recoveries().await {
                error!("Error monitoring recoveries: {}", e);
            }
        }
    }
    
    /// Process pending recovery operations
    async fn process_recovery_queue(&self) -> Result<()> {
        let mut queue = self.recovery_queue.write().await;
        
        while let Some(recovery) = queue.pop_front() {
            self.execute_recovery(recovery).await?;
        }
        
        Ok(())
    }
    
    /// Execute a recovery operation
    async fn execute_recovery(&self, recovery: RecoveryOperation) -> Result<()> {
        info!("Executing recovery operation: {}", recovery.operation_id);
        
        let start_time = SystemTime::now();
        
        // Update recovery status
        {
            let mut active_recoveries = self.active_recoveries.write().await;
            active_recoveries.insert(recovery.operation_id, RecoveryOperation {
                status: RecoveryStatus::Running,
                ..recovery.clone()
            });
        }
        
        let mut success = true;
        let mut progress = 0.0;
        
        // Execute each recovery action
        for (i, action) in recovery.recovery_actions.iter().enumerate() {
            if let Err(e) = self.execute_recovery_action(action).await {
                error!("Recovery action failed: {}", e);
                success = false;
                break;
            }
            
            progress = ((i + 1) as f64) / (recovery.recovery_actions.len() as f64);
            
            // Update progress
            {
                let mut active_recoveries = self.active_recoveries.write().await;
                if let Some(active_recovery) = active_recoveries.get_mut(&recovery.operation_id) {
                    active_recovery.progress = progress;
                }
            }
            
            // Broadcast progress event
            let _ = self.recovery_events_tx.send(RecoveryEvent::RecoveryProgress(recovery.operation_id, progress));
        }
        
        // Update final status
        {
            let mut active_recoveries = self.active_recoveries.write().await;
            if let Some(active_recovery) = active_recoveries.get_mut(&recovery.operation_id) {
                active_recovery.status = if success { RecoveryStatus::Completed } else { RecoveryStatus::Failed };
                active_recovery.progress = if success { 1.0 } else { progress };
            }
        }
        
        // Move to history
        {
            let mut active_recoveries = self.active_recoveries.write().await;
            if let Some(completed_recovery) = active_recoveries.remove(&recovery.operation_id) {
                let mut history = self.recovery_history.write().await;
                history.push(completed_recovery);
            }
        }
        
        // Update statistics
        {
            let mut stats = self.recovery_statistics.write().await;
            stats.total_recoveries_initiated += 1;
            if success {
                stats.successful_recoveries += 1;
            } else {
                stats.failed_recoveries += 1;
            }
            
            let elapsed = SystemTime::now().duration_since(start_time).unwrap_or_default();
            stats.average_recovery_time = Duration::from_nanos(
                (stats.average_recovery_time.as_nanos() + elapsed.as_nanos()) / 2
            );
        }
        
        // Broadcast completion event
        let _ = self.recovery_events_tx.send(RecoveryEvent::RecoveryCompleted(recovery.operation_id, success));
        
        info!("Recovery operation {} completed with status: {}", recovery.operation_id, if success { "success" } else { "failed" });
        
        Ok(())
    }
    
    /// Execute a specific recovery action
    async fn execute_recovery_action(&self, action: &RecoveryAction) -> Result<()> {
        match action {
            RecoveryAction::RestartProcesses { task_ids, node_ids } => {
                debug!("Restarting processes on nodes: {:?}", node_ids);
                // Implementation would restart processes
                Ok(())
            }
            RecoveryAction::ReassignTasks { task_ids, target_nodes } => {
                debug!("Reassigning {} tasks to nodes: {:?}", task_ids.len(), target_nodes);
                // Implementation would reassign tasks
                Ok(())
            }
            RecoveryAction::ScaleCluster { add_nodes, remove_nodes } => {
                debug!("Scaling cluster: add {}, remove {}", add_nodes, remove_nodes.len());
                // Implementation would scale cluster
                Ok(())
            }
            RecoveryAction::ActivateReplicas { affected_services } => {
                debug!("Activating replicas for services: {:?}", affected_services);
                // Implementation would activate replicas
                Ok(())
            }
            RecoveryAction::LoadShedding { max_concurrent_tasks } => {
                debug!("Load shedding: limiting to {} concurrent tasks", max_concurrent_tasks);
                // Implementation would limit task concurrency
                Ok(())
            }
            RecoveryAction::RetryOperations { operation_ids, max_retries } => {
                debug!("Retrying {} operations (max {} retries)", operation_ids.len(), max_retries);
                // Implementation would retry operations
                Ok(())
            }
            RecoveryAction::Rollback { checkpoint_id } => {
                debug!("Rolling back to checkpoint: {}", checkpoint_id);
                // Implementation would perform rollback
                Ok(())
            }
            RecoveryAction::ApplyConfiguration { config_updates } => {
                debug!("Applying configuration updates: {} items", config_updates.len());
                // Implementation would apply configuration
                Ok(())
            }
            RecoveryAction::ManualIntervention { instructions } => {
                info!("Manual intervention required: {}", instructions);
                // Manual intervention - no automatic action
                Ok(())
            }
            RecoveryAction::WaitAndMonitor { timeout, check_interval } => {
                debug!("Wait and monitor for {} with {} interval", timeout, check_interval);
                // Wait for potential self-recovery
                tokio::time::sleep(*timeout).await;
                Ok(())
            }
        }
    }
    
    /// Monitor active recovery operations
    async fn monitor_active_recoveries(&self) -> Result<()> {
        let mut recoveries_to_timeout = Vec::new();
        
        let current_time = SystemTime::now();
        let policies = self.recovery_policies.read().await;
        
        {
            let active_recoveries = self.active_recoveries.read().await;
            
            for (operation_id, recovery) in active_recoveries.iter() {
                let elapsed = current_time.duration_since(recovery.start_time)
                    .unwrap_or_default();
                
                if elapsed > policies.recovery_timeout {
                    recoveries_to_timeout.push(*operation_id);
                }
            }
        }
        
        // Handle timeouts
        for operation_id in recoveries_to_timeout {
            warn!("Recovery operation {} timed out", operation_id);
            
            {
                let mut active_recoveries = self.active_recoveries.write().await;
                if let Some(recovery) = active_recoveries.get_mut(&operation_id) {
                    recovery.status = RecoveryStatus::Failed;
                }
            }
            
            // Broadcast timeout event
            let _ = self.recovery_events_tx.send(RecoveryEvent::RecoveryFailed(operation_id, "Timeout".to_string()));
        }
        
        Ok(())
    }
    
    /// Get recovery statistics
    pub async fn get_statistics(&self) -> RecoveryStatistics {
        self.recovery_statistics.read().await.clone()
    }
    
    /// Subscribe to recovery events
    pub fn subscribe_events(&self) -> broadcast::Receiver<RecoveryEvent> {
        self.recovery_events_tx.subscribe()
    }
}

impl Default for FaultDetectionStrategy {
    fn default() -> Self {
        Self {
            heartbeat_timeout: Duration::from_secs(30),
            task_timeout: Duration::from_secs(120),
            performance_threshold: 0.8,
            resource_threshold: 0.9,
            network_latency_threshold: Duration::from_secs(5),
            error_rate_threshold: 0.1,
        }
    }
}

impl Default for RecoveryPolicies {
    fn default() -> Self {
        Self {
            auto_recovery_enabled: true,
            max_concurrent_recoveries: 5,
            recovery_timeout: Duration::from_secs(300),
            rollback_enabled: true,
            checkpoint_retention_days: 7,
            aggressive_failure_detection: false,
            isolation_timeout: Duration::from_secs(60),
        }
    }
}

impl CheckpointManager {
    /// Create a new checkpoint manager
    pub fn new(cluster: Arc<Cluster>, max_checkpoints: usize, auto_checkpoint_interval: Duration) -> Self {
        Self {
            cluster,
            checkpoints: Arc::new(RwLock::new(HashMap::new())),
            max_checkpoints,
            auto_checkpoint_interval,
        }
    }
    
    /// Start checkpoint manager
    pub async fn start(&self) -> Result<()> {
        info!("Starting checkpoint manager");
        Ok(())
    }
    
    /// Create a checkpoint of cluster state
    pub async fn create_checkpoint(&self, name: &str) -> Result<Uuid> {
        info!("Creating checkpoint: {}", name);
        
        let checkpoint_id = Uuid::new_v4();
        let creation_time = SystemTime::now();
        
        // Get current cluster state
        let cluster_status = self.cluster.get_status().await?;
        let active_nodes = self.cluster.get_nodes_by_status(NodeStatus::Active).await?;
        
        // Create checkpoint data structure
        let checkpoint = Checkpoint {
            checkpoint_id,
            creation_time,
            node_states: HashMap::new(),
            task_states: HashMap::new(),
            cluster_configuration: ClusterConfiguration {
                cluster_id: cluster_status.cluster_id,
                active_nodes: active_nodes.iter().map(|n| n.id).collect(),
                scheduler_config: crate::scheduler::SchedulerConfig::default(),
                resource_limits: HashMap::new(),
            },
            data_checksums: HashMap::new(),
            metadata: HashMap::new(),
        };
        
        // Store checkpoint
        {
            let mut checkpoints = self.checkpoints.write().await;
            checkpoints.insert(checkpoint_id, checkpoint);
            
            // Clean up old checkpoints if limit exceeded
            if checkpoints.len() > self.max_checkpoints {
                let oldest_id = checkpoints.keys().min().copied();
                if let Some(old_id) = oldest_id {
                    checkpoints.remove(&old_id);
                }
            }
        }
        
        info!("Created checkpoint {}: {}", name, checkpoint_id);
        Ok(checkpoint_id)
    }
    
    /// Restore from checkpoint
    pub async fn restore_checkpoint(&self, checkpoint_id: Uuid) -> Result<()> {
        info!("Restoring from checkpoint: {}", checkpoint_id);
        
        let checkpoints = self.checkpoints.read().await;
        let checkpoint = checkpoints.get(&checkpoint_id)
            .ok_or_else(|| anyhow::Error::msg("Checkpoint not found"))?;
        
        // Restore cluster configuration
        // Implementation would restore the actual cluster state
        
        info!("Restored from checkpoint: {}", checkpoint_id);
        Ok(())
    }
    
    /// List available checkpoints
    pub async fn list_checkpoints(&self) -> Vec<(Uuid, SystemTime, String)> {
        let checkpoints = self.checkpoints.read().await;
        checkpoints.values()
            .map(|c| (c.checkpoint_id, c.creation_time, format!("Checkpoint {}", c.checkpoint_id)))
            .collect()
    }
}

impl ReplicationManager {
    /// Create a new replication manager
    pub fn new(cluster: Arc<Cluster>, replication_factor: usize) -> Self {
        Self {
            cluster,
            replication_groups: Arc::new(RwLock::new(HashMap::new())),
            replication_factor,
        }
    }
    
    /// Create a replication group
    pub async fn create_replication_group(&self, group_id: &str, primary_node: NodeId) -> Result<()> {
        let mut groups = self.replication_groups.write().await;
        
        groups.insert(group_id.to_string(), ReplicationGroup {
            group_id: group_id.to_string(),
            primary_node,
            replica_nodes: vec![],
            replicated_data: HashMap::new(),
            consistency_model: crate::shared_memory::ConsistencyModel::Sequential,
        });
        
        Ok(())
    }
    
    /// Add replica to group
    pub async fn add_replica(&self, group_id: &str, replica_node: NodeId) -> Result<()> {
        let mut groups = self.replication_groups.write().await;
        
        if let Some(group) = groups.get_mut(group_id) {
            if !group.replica_nodes.contains(&replica_node) {
                group.replica_nodes.push(replica_node);
            }
        }
        
        Ok(())
    }
}

impl Clone for FaultDetector {
    fn clone(&self) -> Self {
        Self {
            cluster: self.cluster.clone(),
            scheduler: self.scheduler.clone(),
            detection_strategy: self.detection_strategy.clone(),
            active_faults: self.active_faults.clone(),
            fault_history: self.fault_history.clone(),
            node_health_status: self.node_health_status.clone(),
            last_heartbeat_check: self.last_heartbeat_check.clone(),
            suspicious_nodes: self.suspicious_nodes.clone(),
            detection_statistics: self.detection_statistics.clone(),
            fault_events_tx: self.fault_events_tx.clone(),
        }
    }
}

impl Clone for RecoveryManager {
    fn clone(&self) -> Self {
        Self {
            cluster: self.cluster.clone(),
            scheduler: self.scheduler.clone(),
            fault_detector: self.fault_detector.clone(),
            active_recoveries: self.active_recoveries.clone(),
            recovery_queue: self.recovery_queue.clone(),
            recovery_history: self.recovery_history.clone(),
            checkpoint_manager: self.checkpoint_manager.clone(),
            replication_manager: self.replication_manager.clone(),
            recovery_policies: self.recovery_policies.clone(),
            recovery_statistics: self.recovery_statistics.clone(),
            recovery_events_tx: self.recovery_events_tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[tokio::test]
    async fn test_fault_detection_creation() {
        let cluster = Arc::new(crate::cluster::Cluster::new(&crate::cluster::ClusterConfig::default()).await.unwrap());
        let scheduler = Arc::new(DistributedScheduler::new(cluster.clone()).await.unwrap());
        
        let detector = FaultDetector::new(cluster, scheduler, None);
        assert!(detector.detection_strategy.heartbeat_timeout > Duration::from_secs(0));
    }
    
    #[tokio::test]
    async fn test_fault_detection() {
        let cluster = Arc::new(crate::cluster::Cluster::new(&crate::cluster::ClusterConfig::default()).await.unwrap());
        let scheduler = Arc::new(DistributedScheduler::new(cluster.clone()).await.unwrap());
        let detector = Arc::new(FaultDetector::new(cluster, scheduler, None));
        
        let fault = DetectedFault {
            fault_id: Uuid::new_v4(),
            fault_type: FaultType::NodeFailure,
            severity: FaultSeverity::Critical,
            affected_nodes: vec![],
            affected_tasks: vec![],
            detection_time: SystemTime::now(),
            description: "Test fault".to_string(),
            recovery_suggestions: vec![],
            metadata: HashMap::new(),
        };
        
        let result = detector.handle_detected_fault(fault).await;
        assert!(result.is_ok());
        
        let active_faults = detector.get_active_faults().await;
        assert_eq!(active_faults.len(), 1);
    }
    
    #[tokio::test]
    async fn test_recovery_manager() {
        let cluster = Arc::new(crate::cluster::Cluster::new(&crate::cluster::ClusterConfig::default()).await.unwrap());
        let scheduler = Arc::new(DistributedScheduler::new(cluster.clone()).await.unwrap());
        let detector = Arc::new(FaultDetector::new(cluster.clone(), scheduler.clone(), None));
        
        let recovery_manager = RecoveryManager::new(cluster, scheduler, detector);
        let result = recovery_manager.start().await;
        assert!(result.is_ok());
    }
    
    #[tokio::test]
    async fn test_checkpoint_management() {
        let cluster = Arc::new(crate::cluster::Cluster::new(&crate::cluster::ClusterConfig::default()).await.unwrap());
        let checkpoint_manager = CheckpointManager::new(cluster, 5, Duration::from_secs(60));
        
        let checkpoint_id = checkpoint_manager.create_checkpoint("test_checkpoint").await.unwrap();
        assert!(!checkpoint_id.is_nil());
        
        let checkpoints = checkpoint_manager.list_checkpoints().await;
        assert_eq!(checkpoints.len(), 1);
    }
    
    #[test]
    fn test_fault_severity_ordering() {
        assert!(FaultSeverity::Fatal > FaultSeverity::Critical);
        assert!(FaultSeverity::Critical > FaultSeverity::Major);
        assert!(FaultSeverity::Major > FaultSeverity::Minor);
        assert!(FaultSeverity::Minor > FaultSeverity::Warning);
        assert!(FaultSeverity::Warning > FaultSeverity::Info);
    }
    
    #[test]
    fn test_recovery_status_ordering() {
        assert_eq!(RecoveryStatus::Pending, RecoveryStatus::Pending);
        assert_ne!(RecoveryStatus::Completed, RecoveryStatus::Failed);
    }
    
    #[test]
    fn test_fault_types() {
        let fault_types = vec![
            FaultType::NodeFailure,
            FaultType::NetworkPartition,
            FaultType::MessageLoss,
            FaultType::TaskTimeout,
            FaultType::ResourceExhaustion,
            FaultType::DataCorruption,
            FaultType::PerformanceDegradation,
            FaultType::ConfigurationError,
            FaultType::SecurityBreach,
        ];
        
        assert_eq!(fault_types.len(), 9);
        
        // Test that all fault types can be cloned and compared
        for fault_type in &fault_types {
            let cloned = fault_type.clone();
            assert_eq!(*fault_type, cloned);
        }
    }
}