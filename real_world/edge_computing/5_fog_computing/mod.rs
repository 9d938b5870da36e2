//! Fog Computing Architecture Demonstrations
//! MultiOS Edge Computing Demonstrations

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant, SystemTime};
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use std::sync::{Arc, Mutex};

/// Fog computing layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FogLayer {
    Edge,        // Closest to IoT devices
    NearEdge,    // Local processing clusters
    Regional,    // City/district level
    Metropolitan, // Urban areas
    Continental, // Country/continent level
}

/// Fog node types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FogNodeType {
    IoTGateway,
    EdgeServer,
    MiniDatacenter,
    MicroDatacenter,
    RegionalHub,
    CloudEdge,
}

/// Fog computing node
#[derive(Debug, Clone)]
pub struct FogNode {
    pub node_id: String,
    pub node_type: FogNodeType,
    pub layer: FogLayer,
    pub location: (f64, f64),
    pub specifications: NodeSpecifications,
    pub services: Vec<FogService>,
    pub connected_devices: Vec<String>,
    pub parent_nodes: Vec<String>,
    pub child_nodes: Vec<String>,
    pub network_config: NetworkConfiguration,
    pub monitoring: NodeMonitoring,
    pub status: NodeStatus,
}

/// Node specifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpecifications {
    pub cpu_cores: usize,
    pub memory_gb: u64,
    pub storage_gb: u64,
    pub gpu_available: bool,
    pub gpu_model: Option<String>,
    pub network_bandwidth_mbps: u32,
    pub power_consumption_watts: f32,
    pub cooling_capacity: f32,
    pub failover_capability: bool,
}

/// Fog services offered by nodes
#[derive(Debug, Clone)]
pub struct FogService {
    pub service_id: String,
    pub service_type: ServiceType,
    pub service_name: String,
    pub version: String,
    pub api_endpoint: String,
    pub resource_requirements: ServiceResourceRequirements,
    pub sla_config: SlaConfiguration,
    pub deployment_status: DeploymentStatus,
}

/// Service types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ServiceType {
    DataProcessing,
    MachineLearning,
    RealTimeAnalytics,
    Storage,
    Security,
    Authentication,
    ContentDelivery,
    Gaming,
    VideoProcessing,
    IoTManagement,
    PredictiveMaintenance,
    Blockchain,
    Database,
    Cache,
    LoadBalancer,
    ApiGateway,
}

/// Service resource requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResourceRequirements {
    pub min_cpu_cores: usize,
    pub min_memory_gb: u64,
    pub min_storage_gb: u64,
    pub requires_gpu: bool,
    pub network_bandwidth_mbps: u32,
    pub concurrent_connections: u32,
}

/// SLA configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaConfiguration {
    pub availability_percentage: f32,
    pub max_response_time_ms: u32,
    pub max_latency_ms: u32,
    pub throughput_requirement: f32,
    pub recovery_time_objective_hours: u32,
    pub recovery_point_objective_hours: u32,
}

/// Deployment status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DeploymentStatus {
    NotDeployed,
    Deploying,
    Active,
    Failed,
    Decommissioned,
}

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfiguration {
    pub ip_address: String,
    pub subnet_mask: String,
    pub gateway: String,
    pub dns_servers: Vec<String>,
    pub vlan_id: Option<u32>,
    pub qos_enabled: bool,
    pub encryption_enabled: bool,
}

/// Node monitoring metrics
#[derive(Debug, Clone)]
pub struct NodeMonitoring {
    pub cpu_usage_percent: f32,
    pub memory_usage_percent: f32,
    pub storage_usage_percent: f32,
    pub network_usage_mbps: f32,
    pub temperature_celsius: f32,
    pub uptime_hours: u64,
    pub services_active: u32,
    pub connections_active: u32,
    pub health_score: f32,
    pub last_heartbeat: SystemTime,
}

/// Node status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeStatus {
    Online,
    OnlineDegraded,
    Offline,
    Maintenance,
    Error,
    Critical,
}

/// Fog network topology
#[derive(Debug, Clone)]
pub struct FogNetwork {
    pub network_id: String,
    pub network_name: String,
    pub nodes: HashMap<String, FogNode>,
    pub service_mesh: HashMap<String, ServiceMeshConnection>,
    pub routing_table: RoutingTable,
    pub load_balancer: Arc<Mutex<LoadBalancer>>,
    pub monitoring_system: Arc<Mutex<NetworkMonitoring>>,
}

/// Service mesh connections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMeshConnection {
    pub from_node: String,
    pub to_node: String,
    pub service_type: ServiceType,
    pub latency_ms: f32,
    pub bandwidth_mbps: f32,
    pub reliability_score: f32,
    pub active_connections: u32,
}

/// Routing table for fog network
#[derive(Debug, Clone)]
pub struct RoutingTable {
    pub routes: HashMap<String, Vec<Route>>,
    pub routing_protocol: RoutingProtocol,
    pub convergence_time_ms: u32,
    pub path_optimization: bool,
}

/// Route information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub destination: String,
    pub next_hop: String,
    pub distance: u32,
    pub latency_ms: f32,
    pub bandwidth_mbps: f32,
    pub reliability: f32,
    pub cost: f32,
}

/// Routing protocols
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoutingProtocol {
    Static,
    Rip,
    Ospf,
    Bgp,
    Custom,
}

/// Load balancer for service distribution
#[derive(Debug)]
pub struct LoadBalancer {
    pub algorithms: HashMap<String, LoadBalancingAlgorithm>,
    pub current_strategy: String,
    pub health_check_interval: Duration,
    pub service_health: HashMap<String, ServiceHealth>,
}

/// Load balancing algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LoadBalancingAlgorithm {
    RoundRobin,
    LeastConnections,
    WeightedRoundRobin,
    IpHash,
    LatencyBased,
    ResourceBased,
    Custom(String),
}

/// Service health monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub service_id: String,
    pub status: ServiceHealthStatus,
    pub response_time_ms: f32,
    pub error_rate_percent: f32,
    pub throughput_per_sec: f32,
    pub last_check: SystemTime,
}

/// Service health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ServiceHealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
    Unknown,
    Timeout,
}

/// Network monitoring system
#[derive(Debug)]
pub struct NetworkMonitoring {
    pub network_performance: NetworkPerformanceMetrics,
    pub traffic_analysis: TrafficAnalysis,
    pub anomaly_detection: AnomalyDetection,
    pub alerting_system: AlertingSystem,
}

/// Network performance metrics
#[derive(Debug, Clone)]
pub struct NetworkPerformanceMetrics {
    pub total_throughput_gbps: f64,
    pub average_latency_ms: f32,
    pub packet_loss_percent: f32,
    pub jitter_ms: f32,
    pub utilization_percent: f32,
    pub congestion_level: CongestionLevel,
    pub qos_compliance: f32,
}

/// Traffic analysis
#[derive(Debug, Clone)]
pub struct TrafficAnalysis {
    pub traffic_patterns: HashMap<String, TrafficPattern>,
    pub bandwidth_utilization: HashMap<String, f32>,
    pub protocol_distribution: HashMap<String, f32>,
    pub geographic_distribution: HashMap<String, u32>,
    pub peak_usage_times: Vec<SystemTime>,
}

/// Traffic patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficPattern {
    pub source_node: String,
    pub destination_node: String,
    pub service_type: ServiceType,
    pub traffic_volume_mbps: f32,
    pub peak_hours: Vec<u8>, // Hours of day
    pub trend_direction: TrendDirection,
    pub seasonal_variation: f32,
}

/// Anomaly detection
#[derive(Debug, Clone)]
pub struct AnomalyDetection {
    pub detected_anomalies: Vec<NetworkAnomaly>,
    pub detection_models: HashMap<String, DetectionModel>,
    pub false_positive_rate: f32,
    pub detection_accuracy: f32,
    pub ml_engine: Option<MlEngine>,
}

/// Network anomalies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkAnomaly {
    pub anomaly_id: String,
    pub anomaly_type: AnomalyType,
    pub severity: AnomalySeverity,
    pub affected_nodes: Vec<String>,
    pub description: String,
    pub detected_at: SystemTime,
    pub resolved_at: Option<SystemTime>,
    pub root_cause: Option<String>,
}

/// Anomaly types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnomalyType {
    TrafficSpike,
    LatencyIncrease,
    PacketLoss,
    NodeFailure,
    SecurityBreach,
    ResourceExhaustion,
    ConfigurationError,
    HardwareFailure,
}

/// Anomaly severity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnomalySeverity {
    Info,
    Warning,
    Critical,
    Emergency,
}

/// Detection models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionModel {
    pub model_id: String,
    pub model_type: ModelType,
    pub accuracy: f32,
    pub training_data_size: usize,
    pub last_updated: SystemTime,
    pub parameters: HashMap<String, f32>,
}

/// ML models for anomaly detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ModelType {
    IsolationForest,
    Lstm,
    AutoEncoder,
    Statistical,
    RuleBased,
}

/// Machine learning engine
#[derive(Debug, Clone)]
pub struct MlEngine {
    pub models: HashMap<String, MlModel>,
    pub training_pipeline: TrainingPipeline,
    pub inference_engine: InferenceEngine,
}

/// ML model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlModel {
    pub model_id: String,
    pub model_type: MlModelType,
    pub algorithm: String,
    pub accuracy: f32,
    pub training_time_hours: f32,
    pub deployment_date: SystemTime,
}

/// ML model types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MlModelType {
    Classification,
    Regression,
    Clustering,
    AnomalyDetection,
    TimeSeries,
}

/// Training pipeline
#[derive(Debug, Clone)]
pub struct TrainingPipeline {
    pub data_sources: Vec<DataSource>,
    pub feature_extractors: Vec<FeatureExtractor>,
    pub preprocessing_steps: Vec<PreprocessingStep>,
    pub validation_strategy: ValidationStrategy,
}

/// Data sources for ML training
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DataSource {
    NetworkLogs,
    PerformanceMetrics,
    TrafficData,
    SecurityEvents,
    ApplicationLogs,
    SensorData,
}

/// Feature extractors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FeatureExtractor {
    Statistical,
    TimeSeries,
    Frequency,
    Wavelet,
    Custom(String),
}

/// Preprocessing steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PreprocessingStep {
    Normalization,
    Scaling,
    Encoding,
    Filtering,
    Aggregation,
    FeatureSelection,
}

/// Validation strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ValidationStrategy {
    CrossValidation,
    Holdout,
    Bootstrap,
    TimeSeriesSplit,
}

/// Inference engine for ML predictions
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    pub active_models: HashMap<String, InferenceModel>,
    pub batch_processing: bool,
    pub real_time_processing: bool,
    pub model_versioning: bool,
}

/// Inference model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceModel {
    pub model_id: String,
    pub version: String,
    pub input_schema: String,
    pub output_schema: String,
    pub serving_endpoint: String,
    pub scaling_config: ScalingConfiguration,
}

/// Scaling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingConfiguration {
    pub min_instances: u32,
    pub max_instances: u32,
    pub target_cpu_percent: f32,
    pub target_memory_percent: f32,
    pub auto_scaling_enabled: bool,
}

/// Alerting system
#[derive(Debug, Clone)]
pub struct AlertingSystem {
    pub active_alerts: Vec<NetworkAlert>,
    pub alert_rules: Vec<AlertRule>,
    pub notification_channels: Vec<NotificationChannel>,
    pub escalation_policies: Vec<EscalationPolicy>,
}

/// Network alerts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkAlert {
    pub alert_id: String,
    pub alert_type: NetworkAlertType,
    pub severity: AlertSeverity,
    pub affected_services: Vec<String>,
    pub message: String,
    pub recommendations: Vec<String>,
    pub created_at: SystemTime,
    pub acknowledged_by: Option<String>,
    pub resolved_at: Option<SystemTime>,
}

/// Network alert types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NetworkAlertType {
    HighLatency,
    BandwidthExhaustion,
    ServiceFailure,
    SecurityThreat,
    PerformanceDegradation,
    CapacityThreshold,
}

/// Alert rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRule {
    pub rule_id: String,
    pub rule_name: String,
    pub condition: AlertCondition,
    pub severity: AlertSeverity,
    pub notification_channels: Vec<NotificationChannel>,
    pub enabled: bool,
}

/// Alert conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertCondition {
    pub metric_name: String,
    pub operator: ComparisonOperator,
    pub threshold: f32,
    pub time_window: Duration,
}

/// Comparison operators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ComparisonOperator {
    GreaterThan,
    LessThan,
    EqualTo,
    NotEqualTo,
    InRange,
    NotInRange,
}

/// Notification channels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationChannel {
    Email,
    SMS,
    Slack,
    Teams,
    Webhook,
    MobilePush,
    Dashboard,
}

/// Escalation policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationPolicy {
    pub policy_id: String,
    pub policy_name: String,
    pub escalation_levels: Vec<EscalationLevel>,
    pub auto_escalation: bool,
    pub cooldown_period: Duration,
}

/// Escalation levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationLevel {
    pub level: u8,
    pub delay_minutes: u32,
    pub notification_channels: Vec<NotificationChannel>,
    pub required_acknowledge: bool,
}

/// Fog computing orchestrator
pub struct FogOrchestrator {
    pub network: Arc<Mutex<FogNetwork>>,
    pub service_registry: Arc<Mutex<ServiceRegistry>>,
    pub resource_manager: Arc<Mutex<ResourceManager>>,
    pub orchestration_engine: Arc<Mutex<OrchestrationEngine>>,
    pub performance_optimizer: Arc<Mutex<PerformanceOptimizer>>,
}

/// Service registry for fog services
#[derive(Debug)]
pub struct ServiceRegistry {
    pub services: HashMap<String, FogService>,
    pub service_catalog: HashMap<String, ServiceTemplate>,
    pub service_dependencies: HashMap<String, Vec<String>>,
    pub version_history: HashMap<String, Vec<ServiceVersion>>,
}

/// Service templates for rapid deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceTemplate {
    pub template_id: String,
    pub service_type: ServiceType,
    pub template_name: String,
    pub description: String,
    pub resource_template: ServiceResourceRequirements,
    pub default_sla: SlaConfiguration,
    pub deployment_script: String,
    pub configuration_schema: String,
}

/// Service versions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceVersion {
    pub version: String,
    pub release_date: SystemTime,
    pub changelog: String,
    pub compatibility: Vec<String>,
    pub download_url: String,
}

/// Resource manager
#[derive(Debug)]
pub struct ResourceManager {
    pub allocation_policies: Vec<AllocationPolicy>,
    pub resource_pools: HashMap<String, ResourcePool>,
    pub usage_monitoring: HashMap<String, ResourceUsage>,
    pub reservation_system: ReservationSystem,
}

/// Resource allocation policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationPolicy {
    pub policy_id: String,
    pub policy_name: String,
    pub priority: PolicyPriority,
    pub criteria: AllocationCriteria,
    pub action: AllocationAction,
}

/// Policy priorities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PolicyPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// Allocation criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationCriteria {
    pub cpu_requirement: Option<(usize, usize)>,
    pub memory_requirement: Option<(u64, u64)>,
    pub location_constraints: Option<Vec<String>>,
    pub network_bandwidth: Option<u32>,
}

/// Allocation actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AllocationAction {
    Allocate,
    Deny,
    Queue,
    Scale,
    Migrate,
}

/// Resource pools
#[derive(Debug, Clone)]
pub struct ResourcePool {
    pub pool_id: String,
    pub node_ids: Vec<String>,
    pub total_cpu_cores: usize,
    pub total_memory_gb: u64,
    pub total_storage_gb: u64,
    pub allocated_resources: HashMap<String, ResourceAllocation>,
    pub allocation_policy: String,
}

/// Resource allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceAllocation {
    pub allocation_id: String,
    pub service_id: String,
    pub cpu_cores: usize,
    pub memory_gb: u64,
    pub storage_gb: u64,
    pub network_bandwidth_mbps: u32,
    pub start_time: SystemTime,
    pub end_time: Option<SystemTime>,
}

/// Resource usage monitoring
#[derive(Debug, Clone)]
pub struct ResourceUsage {
    pub node_id: String,
    pub current_cpu_usage: f32,
    pub current_memory_usage: f32,
    pub current_storage_usage: f32,
    pub peak_cpu_usage: f32,
    pub peak_memory_usage: f32,
    pub peak_storage_usage: f32,
    pub usage_history: VecDeque<UsageSample>,
}

/// Usage sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSample {
    pub timestamp: SystemTime,
    pub cpu_usage: f32,
    pub memory_usage: f32,
    pub storage_usage: f32,
    pub active_services: u32,
}

/// Reservation system
#[derive(Debug)]
pub struct ReservationSystem {
    pub active_reservations: Vec<Reservation>,
    pub reservation_queue: Vec<Reservation>,
    pub allocation_history: Vec<AllocationHistory>,
}

/// Service reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub service_id: String,
    pub requested_resources: ServiceResourceRequirements,
    pub start_time: SystemTime,
    pub end_time: Option<SystemTime>,
    pub status: ReservationStatus,
    pub priority: u8,
}

/// Reservation status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    Failed,
}

/// Allocation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationHistory {
    pub allocation_id: String,
    pub service_id: String,
    pub start_time: SystemTime,
    pub end_time: SystemTime,
    pub allocated_resources: ServiceResourceRequirements,
    pub utilization_efficiency: f32,
}

/// Orchestration engine
#[derive(Debug)]
pub struct OrchestrationEngine {
    pub deployment_strategies: HashMap<String, DeploymentStrategy>,
    pub workflow_engine: WorkflowEngine,
    pub scheduling_algorithm: SchedulingAlgorithm,
    pub failover_manager: FailoverManager,
    pub disaster_recovery: DisasterRecovery,
}

/// Deployment strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DeploymentStrategy {
    BlueGreen,
    Canary,
    Rolling,
    SingleNode,
    Distributed,
    Custom(String),
}

/// Workflow engine for service orchestration
#[derive(Debug, Clone)]
pub struct WorkflowEngine {
    pub workflows: HashMap<String, Workflow>,
    pub execution_engine: ExecutionEngine,
    pub monitoring: WorkflowMonitoring,
}

/// Workflow definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub workflow_id: String,
    pub workflow_name: String,
    pub steps: Vec<WorkflowStep>,
    pub dependencies: HashMap<String, Vec<String>>,
    pub timeout: Option<Duration>,
}

/// Workflow step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub step_id: String,
    pub step_name: String,
    pub action: WorkflowAction,
    pub parameters: HashMap<String, serde_json::Value>,
    pub rollback_action: Option<WorkflowAction>,
}

/// Workflow actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorkflowAction {
    DeployService { template_id: String, node_id: String },
    StopService { service_id: String },
    ScaleService { service_id: String, target_instances: u32 },
    MigrateService { service_id: String, target_node: String },
    HealthCheck { service_id: String },
    Rollback { previous_version: String },
    Custom { action_type: String, parameters: HashMap<String, serde_json::Value> },
}

/// Execution engine for workflows
#[derive(Debug, Clone)]
pub struct ExecutionEngine {
    pub running_executions: HashMap<String, WorkflowExecution>,
    pub execution_history: Vec<WorkflowExecution>,
    pub error_handler: ErrorHandler,
}

/// Workflow execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowExecution {
    pub execution_id: String,
    pub workflow_id: String,
    pub status: ExecutionStatus,
    pub started_at: SystemTime,
    pub completed_at: Option<SystemTime>,
    pub current_step: Option<String>,
    pub result: Option<WorkflowResult>,
    pub error_log: Vec<String>,
}

/// Execution status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExecutionStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
    Timeout,
}

/// Workflow result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub success: bool,
    pub output: HashMap<String, serde_json::Value>,
    pub execution_time_ms: u64,
}

/// Workflow monitoring
#[derive(Debug, Clone)]
pub struct WorkflowMonitoring {
    pub execution_metrics: WorkflowExecutionMetrics,
    pub performance_stats: WorkflowPerformanceStats,
}

/// Workflow execution metrics
#[derive(Debug, Clone)]
pub struct WorkflowExecutionMetrics {
    pub total_executions: u64,
    pub successful_executions: u64,
    pub failed_executions: u64,
    pub avg_execution_time_ms: f64,
    pub success_rate_percent: f32,
}

/// Workflow performance statistics
#[derive(Debug, Clone)]
pub struct WorkflowPerformanceStats {
    pub most_used_workflows: Vec<String>,
    pub avg_step_time_ms: HashMap<String, f64>,
    pub error_rates: HashMap<String, f32>,
    pub throughput_per_hour: f32,
}

/// Error handler for workflow execution
#[derive(Debug, Clone)]
pub struct ErrorHandler {
    pub retry_policies: HashMap<String, RetryPolicy>,
    pub error_handling_strategies: HashMap<String, ErrorHandlingStrategy>,
}

/// Retry policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub policy_id: String,
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f32,
    pub retry_conditions: Vec<RetryCondition>,
}

/// Retry conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RetryCondition {
    NetworkError,
    Timeout,
    ServiceUnavailable,
    Custom { condition: String },
}

/// Error handling strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ErrorHandlingStrategy {
    Retry,
    Skip,
    Rollback,
    Escalate,
    Manual,
}

/// Scheduling algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SchedulingAlgorithm {
    FirstFit,
    BestFit,
    WorstFit,
    RoundRobin,
    PriorityBased,
    ResourceBased,
    LocationAware,
}

/// Failover manager
#[derive(Debug)]
pub struct FailoverManager {
    pub failover_policies: HashMap<String, FailoverPolicy>,
    pub health_checkers: HashMap<String, HealthChecker>,
    pub recovery_strategies: HashMap<String, RecoveryStrategy>,
}

/// Failover policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailoverPolicy {
    pub policy_id: String,
    pub service_type: ServiceType,
    pub health_threshold: f32,
    pub failover_nodes: Vec<String>,
    pub automatic_failover: bool,
    pub failover_timeout: Duration,
}

/// Health checkers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthChecker {
    pub checker_id: String,
    pub service_id: String,
    pub check_interval: Duration,
    pub check_type: HealthCheckType,
    pub threshold_conditions: Vec<HealthCondition>,
}

/// Health check types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HealthCheckType {
    Http,
    Tcp,
    Custom,
}

/// Health conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCondition {
    pub metric: String,
    pub operator: ComparisonOperator,
    pub value: f32,
}

/// Recovery strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryStrategy {
    pub strategy_id: String,
    pub failure_type: AnomalyType,
    pub recovery_steps: Vec<RecoveryStep>,
    pub recovery_time_target: Duration,
}

/// Recovery steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryStep {
    pub step_id: String,
    pub step_name: String,
    pub action: String,
    pub parameters: HashMap<String, serde_json::Value>,
    pub timeout: Duration,
}

/// Disaster recovery
#[derive(Debug)]
pub struct DisasterRecovery {
    pub backup_policies: HashMap<String, BackupPolicy>,
    pub recovery_procedures: HashMap<String, RecoveryProcedure>,
    pub cross_region_setup: CrossRegionSetup,
    pub testing_schedule: TestingSchedule,
}

/// Backup policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupPolicy {
    pub policy_id: String,
    pub service_id: String,
    pub backup_frequency: BackupFrequency,
    pub retention_period_days: u32,
    pub backup_location: String,
    pub encryption_enabled: bool,
}

/// Backup frequencies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BackupFrequency {
    RealTime,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

/// Recovery procedures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryProcedure {
    pub procedure_id: String,
    pub procedure_name: String,
    pub steps: Vec<RecoveryStep>,
    pub estimated_recovery_time: Duration,
    pub prerequisites: Vec<String>,
}

/// Cross-region setup
#[derive(Debug, Clone)]
pub struct CrossRegionSetup {
    pub regions: Vec<String>,
    pub replication_policies: HashMap<String, ReplicationPolicy>,
    pub data_consistency: DataConsistencyLevel,
}

/// Replication policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicationPolicy {
    pub policy_id: String,
    pub source_region: String,
    pub target_regions: Vec<String>,
    pub replication_type: ReplicationType,
    pub consistency_level: DataConsistencyLevel,
}

/// Replication types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReplicationType {
    Synchronous,
    Asynchronous,
    SemiSynchronous,
}

/// Data consistency levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DataConsistencyLevel {
    Strong,
    Eventual,
    Weak,
}

/// Testing schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestingSchedule {
    pub last_test: Option<SystemTime>,
    pub next_test: SystemTime,
    pub test_frequency: TestFrequency,
    pub test_scenarios: Vec<TestScenario>,
}

/// Test frequencies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TestFrequency {
    Weekly,
    Monthly,
    Quarterly,
    OnDemand,
}

/// Test scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TestScenario {
    NodeFailure,
    NetworkPartition,
    DataCorruption,
    ServiceOutage,
    SecurityBreach,
}

/// Performance optimizer
#[derive(Debug)]
pub struct PerformanceOptimizer {
    pub optimization_algorithms: HashMap<String, OptimizationAlgorithm>,
    pub performance_models: HashMap<String, PerformanceModel>,
    pub recommendation_engine: RecommendationEngine,
    pub auto_tuning: AutoTuning,
}

/// Optimization algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationAlgorithm {
    Genetic,
    SimulatedAnnealing,
    GradientDescent,
    ParticleSwarm,
    Custom(String),
}

/// Performance models
#[derive(Debug, Clone)]
pub struct PerformanceModel {
    pub model_id: String,
    pub model_type: ModelType,
    pub accuracy: f32,
    pub prediction_horizon_hours: u32,
    pub feature_importance: HashMap<String, f32>,
    pub last_trained: SystemTime,
}

/// Recommendation engine
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    pub recommendation_history: Vec<Recommendation>,
    pub feedback_system: FeedbackSystem,
    pub learning_rate: f32,
}

/// Recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation_id: String,
    pub recommendation_type: RecommendationType,
    pub priority: RecommendationPriority,
    pub description: String,
    pub expected_impact: ExpectedImpact,
    pub confidence: f32,
    pub created_at: SystemTime,
}

/// Recommendation types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecommendationType {
    ResourceOptimization,
    PerformanceTuning,
    CostReduction,
    SecurityEnhancement,
    ScalingRecommendation,
}

/// Recommendation priorities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecommendationPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// Expected impact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedImpact {
    pub performance_improvement_percent: f32,
    pub cost_reduction_percent: f32,
    pub reliability_improvement_percent: f32,
    pub implementation_effort_hours: u32,
}

/// Feedback system
#[derive(Debug, Clone)]
pub struct FeedbackSystem {
    pub feedback_history: Vec<Feedback>,
    pub satisfaction_scores: HashMap<String, f32>,
    pub learning_progress: f32,
}

/// Feedback records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub feedback_id: String,
    pub recommendation_id: String,
    pub rating: u8, // 1-5
    pub comment: Option<String>,
    pub timestamp: SystemTime,
}

/// Auto-tuning system
#[derive(Debug, Clone)]
pub struct AutoTuning {
    pub tuning_parameters: HashMap<String, TuningParameter>,
    pub learning_history: Vec<TuningRecord>,
    pub current_optimizations: Vec<ActiveOptimization>,
}

/// Tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningParameter {
    pub parameter_name: String,
    pub parameter_type: ParameterType,
    pub current_value: f32,
    pub optimal_value: Option<f32>,
    pub tuning_range: (f32, f32),
}

/// Parameter types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParameterType {
    Cpu,
    Memory,
    Network,
    Storage,
    Custom(String),
}

/// Tuning records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningRecord {
    pub record_id: String,
    pub parameter_name: String,
    pub initial_value: f32,
    pub final_value: f32,
    pub performance_before: f32,
    pub performance_after: f32,
    pub tuning_date: SystemTime,
}

/// Active optimizations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveOptimization {
    pub optimization_id: String,
    pub parameter_name: String,
    pub target_improvement: f32,
    pub estimated_completion: SystemTime,
    pub status: OptimizationStatus,
}

/// Optimization status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationStatus {
    InProgress,
    Completed,
    Paused,
    Failed,
}

/// Create sample fog network
pub fn create_sample_fog_network() -> FogNetwork {
    let mut network = FogNetwork {
        network_id: "multios-fog-net-001".to_string(),
        network_name: "MultiOS Fog Computing Network".to_string(),
        nodes: HashMap::new(),
        service_mesh: HashMap::new(),
        routing_table: RoutingTable {
            routes: HashMap::new(),
            routing_protocol: RoutingProtocol::Ospf,
            convergence_time_ms: 1000,
            path_optimization: true,
        },
        load_balancer: Arc::new(Mutex::new(LoadBalancer {
            algorithms: HashMap::new(),
            current_strategy: "least_connections".to_string(),
            health_check_interval: Duration::from_secs(30),
            service_health: HashMap::new(),
        })),
        monitoring_system: Arc::new(Mutex::new(NetworkMonitoring {
            network_performance: NetworkPerformanceMetrics {
                total_throughput_gbps: 50.0,
                average_latency_ms: 15.0,
                packet_loss_percent: 0.01,
                jitter_ms: 2.0,
                utilization_percent: 65.0,
                congestion_level: CongestionLevel::Light,
                qos_compliance: 95.0,
            },
            traffic_analysis: TrafficAnalysis {
                traffic_patterns: HashMap::new(),
                bandwidth_utilization: HashMap::new(),
                protocol_distribution: HashMap::new(),
                geographic_distribution: HashMap::new(),
                peak_usage_times: Vec::new(),
            },
            anomaly_detection: AnomalyDetection {
                detected_anomalies: Vec::new(),
                detection_models: HashMap::new(),
                false_positive_rate: 2.5,
                detection_accuracy: 94.0,
                ml_engine: Some(MlEngine {
                    models: HashMap::new(),
                    training_pipeline: TrainingPipeline {
                        data_sources: Vec::new(),
                        feature_extractors: Vec::new(),
                        preprocessing_steps: Vec::new(),
                        validation_strategy: ValidationStrategy::CrossValidation,
                    },
                    inference_engine: InferenceEngine {
                        active_models: HashMap::new(),
                        batch_processing: true,
                        real_time_processing: true,
                        model_versioning: true,
                    },
                }),
            },
            alerting_system: AlertingSystem {
                active_alerts: Vec::new(),
                alert_rules: Vec::new(),
                notification_channels: Vec::new(),
                escalation_policies: Vec::new(),
            },
        })),
    };

    // Create sample fog nodes
    let edge_node = FogNode {
        node_id: "edge-001".to_string(),
        node_type: FogNodeType::IoTGateway,
        layer: FogLayer::Edge,
        location: (37.7749, -122.4194),
        specifications: NodeSpecifications {
            cpu_cores: 4,
            memory_gb: 8,
            storage_gb: 128,
            gpu_available: false,
            gpu_model: None,
            network_bandwidth_mbps: 100,
            power_consumption_watts: 25.0,
            cooling_capacity: 50.0,
            failover_capability: false,
        },
        services: vec![FogService {
            service_id: "data-proc-001".to_string(),
            service_type: ServiceType::DataProcessing,
            service_name: "IoT Data Processor".to_string(),
            version: "1.0.0".to_string(),
            api_endpoint: "http://edge-001/api/v1".to_string(),
            resource_requirements: ServiceResourceRequirements {
                min_cpu_cores: 2,
                min_memory_gb: 4,
                min_storage_gb: 32,
                requires_gpu: false,
                network_bandwidth_mbps: 50,
                concurrent_connections: 100,
            },
            sla_config: SlaConfiguration {
                availability_percentage: 99.5,
                max_response_time_ms: 100,
                max_latency_ms: 50,
                throughput_requirement: 1000.0,
                recovery_time_objective_hours: 4,
                recovery_point_objective_hours: 1,
            },
            deployment_status: DeploymentStatus::Active,
        }],
        connected_devices: vec!["sensor-001".to_string(), "sensor-002".to_string()],
        parent_nodes: vec![],
        child_nodes: vec![],
        network_config: NetworkConfiguration {
            ip_address: "192.168.1.10".to_string(),
            subnet_mask: "255.255.255.0".to_string(),
            gateway: "192.168.1.1".to_string(),
            dns_servers: vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()],
            vlan_id: Some(10),
            qos_enabled: true,
            encryption_enabled: true,
        },
        monitoring: NodeMonitoring {
            cpu_usage_percent: 35.0,
            memory_usage_percent: 42.0,
            storage_usage_percent: 25.0,
            network_usage_mbps: 15.0,
            temperature_celsius: 45.0,
            uptime_hours: 8760,
            services_active: 1,
            connections_active: 5,
            health_score: 95.0,
            last_heartbeat: SystemTime::now(),
        },
        status: NodeStatus::Online,
    };

    let regional_node = FogNode {
        node_id: "regional-001".to_string(),
        node_type: FogNodeType::MiniDatacenter,
        layer: FogLayer::Regional,
        location: (37.7849, -122.4094),
        specifications: NodeSpecifications {
            cpu_cores: 16,
            memory_gb: 64,
            storage_gb: 1024,
            gpu_available: true,
            gpu_model: Some("NVIDIA T4".to_string()),
            network_bandwidth_mbps: 1000,
            power_consumption_watts: 200.0,
            cooling_capacity: 500.0,
            failover_capability: true,
        },
        services: vec![FogService {
            service_id: "ml-001".to_string(),
            service_type: ServiceType::MachineLearning,
            service_name: "Regional ML Service".to_string(),
            version: "2.1.0".to_string(),
            api_endpoint: "http://regional-001/api/v1".to_string(),
            resource_requirements: ServiceResourceRequirements {
                min_cpu_cores: 8,
                min_memory_gb: 32,
                min_storage_gb: 256,
                requires_gpu: true,
                network_bandwidth_mbps: 500,
                concurrent_connections: 1000,
            },
            sla_config: SlaConfiguration {
                availability_percentage: 99.9,
                max_response_time_ms: 50,
                max_latency_ms: 25,
                throughput_requirement: 5000.0,
                recovery_time_objective_hours: 2,
                recovery_point_objective_hours: 1,
            },
            deployment_status: DeploymentStatus::Active,
        }],
        connected_devices: vec!["edge-001".to_string()],
        parent_nodes: vec![],
        child_nodes: vec!["edge-001".to_string()],
        network_config: NetworkConfiguration {
            ip_address: "10.0.1.100".to_string(),
            subnet_mask: "255.255.0.0".to_string(),
            gateway: "10.0.0.1".to_string(),
            dns_servers: vec!["8.8.8.8".to_string()],
            vlan_id: Some(100),
            qos_enabled: true,
            encryption_enabled: true,
        },
        monitoring: NodeMonitoring {
            cpu_usage_percent: 68.0,
            memory_usage_percent: 55.0,
            storage_usage_percent: 30.0,
            network_usage_mbps: 250.0,
            temperature_celsius: 52.0,
            uptime_hours: 4380, // 6 months
            services_active: 1,
            connections_active: 15,
            health_score: 88.0,
            last_heartbeat: SystemTime::now(),
        },
        status: NodeStatus::Online,
    };

    // Add nodes to network
    network.nodes.insert("edge-001".to_string(), edge_node);
    network.nodes.insert("regional-001".to_string(), regional_node);

    network
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fog_node_creation() {
        let node = FogNode {
            node_id: "test-node".to_string(),
            node_type: FogNodeType::EdgeServer,
            layer: FogLayer::Edge,
            location: (0.0, 0.0),
            specifications: NodeSpecifications {
                cpu_cores: 4,
                memory_gb: 8,
                storage_gb: 256,
                gpu_available: false,
                gpu_model: None,
                network_bandwidth_mbps: 100,
                power_consumption_watts: 50.0,
                cooling_capacity: 100.0,
                failover_capability: true,
            },
            services: Vec::new(),
            connected_devices: Vec::new(),
            parent_nodes: Vec::new(),
            child_nodes: Vec::new(),
            network_config: NetworkConfiguration {
                ip_address: "192.168.1.10".to_string(),
                subnet_mask: "255.255.255.0".to_string(),
                gateway: "192.168.1.1".to_string(),
                dns_servers: vec!["8.8.8.8".to_string()],
                vlan_id: None,
                qos_enabled: false,
                encryption_enabled: false,
            },
            monitoring: NodeMonitoring {
                cpu_usage_percent: 50.0,
                memory_usage_percent: 60.0,
                storage_usage_percent: 40.0,
                network_usage_mbps: 20.0,
                temperature_celsius: 45.0,
                uptime_hours: 1000,
                services_active: 0,
                connections_active: 0,
                health_score: 85.0,
                last_heartbeat: SystemTime::now(),
            },
            status: NodeStatus::Online,
        };

        assert_eq!(node.node_id, "test-node");
        assert_eq!(node.layer, FogLayer::Edge);
        assert_eq!(node.status, NodeStatus::Online);
    }

    #[test]
    fn test_fog_service_creation() {
        let service = FogService {
            service_id: "test-service".to_string(),
            service_type: ServiceType::DataProcessing,
            service_name: "Test Data Processor".to_string(),
            version: "1.0.0".to_string(),
            api_endpoint: "http://test-service/api/v1".to_string(),
            resource_requirements: ServiceResourceRequirements {
                min_cpu_cores: 2,
                min_memory_gb: 4,
                min_storage_gb: 64,
                requires_gpu: false,
                network_bandwidth_mbps: 50,
                concurrent_connections: 100,
            },
            sla_config: SlaConfiguration {
                availability_percentage: 99.0,
                max_response_time_ms: 200,
                max_latency_ms: 100,
                throughput_requirement: 500.0,
                recovery_time_objective_hours: 4,
                recovery_point_objective_hours: 1,
            },
            deployment_status: DeploymentStatus::Active,
        };

        assert_eq!(service.service_type, ServiceType::DataProcessing);
        assert_eq!(service.deployment_status, DeploymentStatus::Active);
    }

    #[test]
    fn test_fog_network_creation() {
        let network = create_sample_fog_network();
        assert_eq!(network.nodes.len(), 2);
        assert!(network.nodes.contains_key("edge-001"));
        assert!(network.nodes.contains_key("regional-001"));
    }

    #[test]
    fn test_resource_allocation() {
        let allocation = ResourceAllocation {
            allocation_id: "alloc-001".to_string(),
            service_id: "service-001".to_string(),
            cpu_cores: 4,
            memory_gb: 16,
            storage_gb: 256,
            network_bandwidth_mbps: 100,
            start_time: SystemTime::now(),
            end_time: None,
        };

        assert_eq!(allocation.cpu_cores, 4);
        assert!(allocation.end_time.is_none());
    }

    #[test]
    fn test_performance_optimization() {
        let recommendation = Recommendation {
            recommendation_id: "rec-001".to_string(),
            recommendation_type: RecommendationType::ResourceOptimization,
            priority: RecommendationPriority::High,
            description: "Optimize CPU allocation for better performance".to_string(),
            expected_impact: ExpectedImpact {
                performance_improvement_percent: 15.0,
                cost_reduction_percent: 5.0,
                reliability_improvement_percent: 10.0,
                implementation_effort_hours: 8,
            },
            confidence: 0.85,
            created_at: SystemTime::now(),
        };

        assert_eq!(recommendation.recommendation_type, RecommendationType::ResourceOptimization);
        assert!((recommendation.confidence - 0.85).abs() < f32::EPSILON);
    }
}