//! Edge Device Clustering and Orchestration
//! MultiOS Edge Computing Demonstrations

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant, SystemTime};
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use std::sync::{Arc, Mutex};

/// Edge cluster types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClusterType {
    Homogeneous,
    Heterogeneous,
    Hybrid,
    Federated,
    Dynamic,
}

/// Edge cluster configuration
#[derive(Debug, Clone)]
pub struct EdgeCluster {
    pub cluster_id: String,
    pub cluster_name: String,
    pub cluster_type: ClusterType,
    pub master_node: String,
    pub worker_nodes: Vec<String>,
    pub cluster_specifications: ClusterSpecifications,
    pub orchestration_config: OrchestrationConfig,
    pub monitoring_config: MonitoringConfig,
    pub security_config: ClusterSecurityConfig,
    pub networking_config: NetworkingConfig,
}

/// Cluster specifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSpecifications {
    pub total_cpu_cores: usize,
    pub total_memory_gb: u64,
    pub total_storage_gb: u64,
    pub total_gpu_count: u32,
    pub network_bandwidth_gbps: f32,
    pub max_concurrent_workloads: u32,
    pub fault_tolerance_level: u8,
    pub redundancy_factor: u8,
}

/// Orchestration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationConfig {
    pub scheduler_type: SchedulerType,
    pub load_balancing_algorithm: LoadBalancingAlgorithm,
    pub resource_sharing: ResourceSharingPolicy,
    pub auto_scaling: AutoScalingConfig,
    pub failover_strategy: FailoverStrategy,
    pub deployment_strategy: DeploymentStrategy,
}

/// Scheduling types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SchedulerType {
    Centralized,
    Decentralized,
    Hybrid,
    AIOptimized,
    LoadBalanced,
}

/// Load balancing algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LoadBalancingAlgorithm {
    RoundRobin,
    LeastConnections,
    ResourceBased,
    LatencyBased,
    Geographic,
    MachineLearning,
}

/// Resource sharing policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResourceSharingPolicy {
    Static,
    Dynamic,
    PriorityBased,
    FairShare,
    WorkloadAware,
}

/// Auto scaling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoScalingConfig {
    pub enabled: bool,
    pub min_nodes: u32,
    pub max_nodes: u32,
    pub scale_up_threshold: f32,
    pub scale_down_threshold: f32,
    pub cooldown_period_minutes: u32,
    pub scaling_policy: ScalingPolicy,
}

/// Scaling policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScalingPolicy {
    Reactive,
    Predictive,
    Scheduled,
    CostOptimized,
    PerformanceBased,
}

/// Failover strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FailoverStrategy {
    ActiveStandby,
    NPlusOne,
    FullRedundancy,
    Geographic,
    ApplicationLevel,
}

/// Deployment strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DeploymentStrategy {
    Rolling,
    BlueGreen,
    Canary,
    SingleNode,
    AllAtOnce,
}

/// Monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub metrics_collection_interval: Duration,
    pub log_aggregation: bool,
    pub alerting_enabled: bool,
    pub performance_profiling: bool,
    pub capacity_planning: bool,
    pub anomaly_detection: bool,
}

/// Cluster security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSecurityConfig {
    pub encryption_enabled: bool,
    pub mutual_tls: bool,
    pub certificate_management: CertificateManagement,
    pub access_control: AccessControl,
    pub network_isolation: bool,
    pub security_monitoring: SecurityMonitoring,
}

/// Certificate management
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateManagement {
    pub certificate_authority: String,
    pub certificate_rotation_days: u32,
    pub automated_renewal: bool,
    pub certificate_store: String,
}

/// Access control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessControl {
    pub authentication_method: AuthenticationMethod,
    pub authorization_model: AuthorizationModel,
    pub role_based_access: bool,
    pub multi_factor_auth: bool,
}

/// Authentication methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AuthenticationMethod {
    UsernamePassword,
    Certificate,
    Token,
    Biometric,
    Custom,
}

/// Authorization models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AuthorizationModel {
    RoleBased,
    AttributeBased,
    PolicyBased,
    Custom,
}

/// Security monitoring
#[derive(Debug, Clone)]
pub struct SecurityMonitoring {
    pub intrusion_detection: bool,
    pub vulnerability_scanning: bool,
    pub threat_intelligence: bool,
    pub security_events: VecDeque<SecurityEvent>,
}

/// Security event types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub event_id: String,
    pub event_type: SecurityEventType,
    pub severity: SecuritySeverity,
    pub source_node: String,
    pub description: String,
    pub timestamp: SystemTime,
}

/// Security event types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SecurityEventType {
    UnauthorizedAccess,
    IntrusionAttempt,
    CertificateViolation,
    NetworkAnomaly,
    MaliciousActivity,
    PolicyViolation,
}

/// Security severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SecuritySeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Networking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkingConfig {
    pub overlay_network: OverlayNetwork,
    pub service_mesh: ServiceMeshConfig,
    pub network_policies: Vec<NetworkPolicy>,
    pub traffic_shaping: TrafficShapingConfig,
}

/// Overlay network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayNetwork {
    pub network_type: OverlayNetworkType,
    pub network_cidr: String,
    pub encapsulation: EncapsulationType,
    pub encryption: bool,
}

/// Overlay network types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OverlayNetworkType {
    Vxlan,
    Gre,
    Geneve,
    Stt,
    Flannel,
    Calico,
}

/// Encapsulation types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EncapsulationType {
    Vni,
    VniGre,
    VniVxlan,
    VniGeneve,
}

/// Service mesh configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMeshConfig {
    pub mesh_enabled: bool,
    pub mesh_provider: MeshProvider,
    pub traffic_policy: TrafficPolicy,
    pub security_policy: MeshSecurityPolicy,
}

/// Service mesh providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MeshProvider {
    Istio,
    Linkerd,
    ConsulConnect,
    AppMesh,
    Custom,
}

/// Traffic policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficPolicy {
    pub load_balancing: LoadBalancingAlgorithm,
    pub circuit_breaker: CircuitBreakerConfig,
    pub retry_policy: RetryPolicyConfig,
    pub timeout_policy: TimeoutPolicyConfig,
}

/// Circuit breaker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitBreakerConfig {
    pub failure_threshold: u32,
    pub timeout_seconds: u32,
    pub reset_timeout_seconds: u32,
    pub half_open_max_calls: u32,
}

/// Retry policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicyConfig {
    pub max_attempts: u32,
    pub backoff_multiplier: f32,
    pub initial_timeout_ms: u32,
    pub max_timeout_ms: u32,
}

/// Timeout policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutPolicyConfig {
    pub request_timeout_ms: u32,
    pub idle_timeout_ms: u32,
    pub keepalive_timeout_ms: u32,
}

/// Mesh security policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshSecurityPolicy {
    pub mtls_enabled: bool,
    pub mutual_authentication: bool,
    pub authorization_policies: Vec<AuthorizationPolicy>,
}

/// Network policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkPolicy {
    pub policy_id: String,
    pub name: String,
    pub policy_type: NetworkPolicyType,
    pub pod_selector: PodSelector,
    pub ingress_rules: Vec<IngressRule>,
    pub egress_rules: Vec<EgressRule>,
}

/// Network policy types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NetworkPolicyType {
    Ingress,
    Egress,
    Bidirectional,
    Custom,
}

/// Pod selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodSelector {
    pub labels: HashMap<String, String>,
    pub namespace: Option<String>,
}

/// Ingress rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngressRule {
    pub from: Vec<SourceSelector>,
    pub ports: Vec<PortRule>,
    pub protocols: Vec<ProtocolRule>,
}

/// Egress rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EgressRule {
    pub to: Vec<DestinationSelector>,
    pub ports: Vec<PortRule>,
    pub protocols: Vec<ProtocolRule>,
}

/// Source/destination selectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSelector {
    pub namespace_selector: Option<LabelSelector>,
    pub pod_selector: Option<LabelSelector>,
    pub ip_block: Option<IpBlock>,
}

/// Destination selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSelector {
    pub namespace_selector: Option<LabelSelector>,
    pub pod_selector: Option<LabelSelector>,
    pub ip_block: Option<IpBlock>,
}

/// Label selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSelector {
    pub match_labels: HashMap<String, String>,
    pub match_expressions: Vec<LabelSelectorRequirement>,
}

/// Label selector requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: LabelSelectorOperator,
    pub values: Vec<String>,
}

/// Label selector operators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LabelSelectorOperator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

/// IP block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpBlock {
    pub cidr: String,
    pub except: Vec<String>,
}

/// Port rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRule {
    pub port: Option<u32>,
    pub protocol: String,
    pub name: Option<String>,
}

/// Protocol rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolRule {
    pub protocol: Protocol,
    pub ports: Vec<PortRule>,
}

/// Protocol types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    Custom(String),
}

/// Authorization policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationPolicy {
    pub policy_name: String,
    pub action: AuthorizationAction,
    pub principals: Vec<String>,
    pub permissions: Vec<Permission>,
}

/// Authorization actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AuthorizationAction {
    Allow,
    Deny,
}

/// Permissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub resource: String,
    pub operations: Vec<String>,
}

/// Traffic shaping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficShapingConfig {
    pub bandwidth_limits: HashMap<String, BandwidthLimit>,
    pub quality_of_service: QualityOfServiceConfig,
    pub congestion_control: CongestionControlConfig,
}

/// Bandwidth limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandwidthLimit {
    pub service_name: String,
    pub rate_limit_mbps: f32,
    pub burst_limit_mbps: f32,
}

/// Quality of service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityOfServiceConfig {
    pub traffic_classes: Vec<TrafficClass>,
    pub priority_mapping: HashMap<String, u8>,
}

/// Traffic classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficClass {
    pub class_name: String,
    pub priority: u8,
    pub bandwidth_guarantee: f32,
    pub latency_sensitive: bool,
}

/// Congestion control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CongestionControlConfig {
    pub algorithm: CongestionControlAlgorithm,
    pub buffer_size_kb: u32,
    pub drop_policy: DropPolicy,
}

/// Congestion control algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CongestionControlAlgorithm {
    Red,
    Blue,
    CoDel,
    FqCoDel,
    Custom(String),
}

/// Drop policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DropPolicy {
    TailDrop,
    RandomEarlyDetection,
    WeightedRandomEarlyDetection,
}

/// Edge workload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeWorkload {
    pub workload_id: String,
    pub workload_name: String,
    pub workload_type: WorkloadType,
    pub container_images: Vec<ContainerImage>,
    pub resource_requirements: ResourceRequirements,
    pub deployment_config: DeploymentConfiguration,
    pub networking_config: WorkloadNetworkingConfig,
    pub security_config: WorkloadSecurityConfig,
    pub scheduling_constraints: SchedulingConstraints,
}

/// Workload types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorkloadType {
    WebService,
    BatchProcessing,
    StreamProcessing,
    MachineLearning,
    Database,
    Cache,
    MessageBroker,
    IoTGateway,
    Function,
    CronJob,
}

/// Container image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerImage {
    pub name: String,
    pub tag: String,
    pub registry: String,
    pub pull_policy: PullPolicy,
    pub digest: Option<String>,
}

/// Container pull policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PullPolicy {
    Always,
    IfNotPresent,
    Never,
}

/// Resource requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRequirements {
    pub cpu_cores: f32,
    pub memory_mb: u64,
    pub storage_gb: u64,
    pub gpu_requirements: Option<GpuRequirements>,
    pub network_bandwidth_mbps: f32,
    pub special_devices: Vec<String>,
}

/// GPU requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuRequirements {
    pub gpu_model: Option<String>,
    pub gpu_count: u32,
    pub memory_mb: u64,
    pub compute_capability: Option<String>,
}

/// Deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentConfiguration {
    pub replicas: u32,
    pub deployment_strategy: DeploymentStrategy,
    pub health_checks: Vec<HealthCheck>,
    pub restart_policy: RestartPolicy,
    pub tolerations: Vec<Toleration>,
}

/// Health check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub check_type: HealthCheckType,
    pub endpoint: Option<String>,
    pub port: Option<u32>,
    pub initial_delay_seconds: u32,
    pub period_seconds: u32,
    pub timeout_seconds: u32,
    pub failure_threshold: u32,
}

/// Health check types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HealthCheckType {
    HttpGet,
    TcpSocket,
    Exec,
}

/// Restart policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RestartPolicy {
    Always,
    OnFailure,
    Never,
}

/// Pod tolerations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toleration {
    pub key: String,
    pub operator: TolerationOperator,
    pub value: Option<String>,
    pub effect: TolerationEffect,
}

/// Toleration operators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TolerationOperator {
    Equal,
    Exists,
}

/// Toleration effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TolerationEffect {
    NoSchedule,
    PreferNoSchedule,
    NoExecute,
}

/// Workload networking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadNetworkingConfig {
    pub service_type: ServiceType,
    pub ports: Vec<ServicePort>,
    pub ingress_config: Option<IngressConfig>,
    pub dns_name: Option<String>,
}

/// Kubernetes service types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ServiceType {
    ClusterIP,
    NodePort,
    LoadBalancer,
    ExternalName,
}

/// Service port definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePort {
    pub name: String,
    pub port: u32,
    pub target_port: Option<u32>,
    pub protocol: Protocol,
}

/// Ingress configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngressConfig {
    pub class_name: String,
    pub rules: Vec<IngressRuleConfig>,
}

/// Ingress rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngressRuleConfig {
    pub host: Option<String>,
    pub paths: Vec<IngressPath>,
}

/// Ingress paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngressPath {
    pub path: String,
    pub path_type: PathType,
    pub backend: IngressBackend,
}

/// Path types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PathType {
    Exact,
    Prefix,
    Regex,
}

/// Ingress backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngressBackend {
    pub service_name: String,
    pub service_port: u32,
}

/// Workload security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadSecurityConfig {
    pub security_context: SecurityContext,
    pub secrets: Vec<SecretMount>,
    pub certificates: Vec<CertificateMount>,
}

/// Security context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityContext {
    pub run_as_non_root: bool,
    pub run_as_user: Option<u32>,
    pub capabilities: Vec<String>,
    pub allow_privilege_escalation: bool,
    pub read_only_root_filesystem: bool,
}

/// Secret mount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretMount {
    pub secret_name: String,
    pub mount_path: String,
    pub read_only: bool,
}

/// Certificate mount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateMount {
    pub certificate_name: String,
    pub mount_path: String,
    pub read_only: bool,
}

/// Scheduling constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConstraints {
    pub node_selector: HashMap<String, String>,
    pub affinity_rules: Vec<AffinityRule>,
    pub anti_affinity_rules: Vec<AntiAffinityRule>,
    pub topology_spread_constraints: Vec<TopologySpreadConstraint>,
}

/// Node affinity rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffinityRule {
    pub rule_name: String,
    pub node_selector: HashMap<String, String>,
    pub weight: i32,
}

/// Anti-affinity rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntiAffinityRule {
    pub rule_name: String,
    pub pod_selector: HashMap<String, String>,
    pub topology_key: String,
    pub weight: i32,
}

/// Topology spread constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologySpreadConstraint {
    pub topology_key: String,
    pub max_skew: u32,
    pub min_domains: Option<u32>,
    pub when_unsatisfiable: WhenUnsatisfiable,
}

/// When unsatisfiable policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WhenUnsatisfiable {
    DoNotSchedule,
    ScheduleAnyway,
}

/// Edge cluster manager
pub struct EdgeClusterManager {
    pub clusters: Arc<RwLock<HashMap<String, EdgeCluster>>>,
    pub workload_scheduler: Arc<Mutex<WorkloadScheduler>>,
    pub resource_optimizer: Arc<Mutex<ResourceOptimizer>>,
    pub monitoring_system: Arc<Mutex<ClusterMonitoring>>,
    pub fault_tolerance: Arc<Mutex<FaultToleranceManager>>,
}

/// Workload scheduler
#[derive(Debug)]
pub struct WorkloadScheduler {
    pub scheduling_queue: VecDeque<SchedulingRequest>,
    pub scheduling_history: Vec<SchedulingDecision>,
    pub scheduling_algorithms: HashMap<String, SchedulingAlgorithm>,
    pub node_allocations: HashMap<String, Vec<WorkloadAllocation>>,
}

/// Scheduling requests
#[derive(Debug, Clone)]
pub struct SchedulingRequest {
    pub request_id: String,
    pub workload: EdgeWorkload,
    pub priority: SchedulingPriority,
    pub deadline: Option<SystemTime>,
    pub constraints: Vec<SchedulingConstraint>,
}

/// Scheduling priorities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SchedulingPriority {
    Critical,
    High,
    Medium,
    Low,
    Batch,
}

/// Scheduling constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SchedulingConstraint {
    NodeSelector(HashMap<String, String>),
    ResourceRequirement(ResourceRequirements),
    Affinity(HashMap<String, String>),
    AntiAffinity(HashMap<String, String>),
    TopologySpread(String, u32),
}

/// Scheduling decisions
#[derive(Debug, Clone)]
pub struct SchedulingDecision {
    pub request_id: String,
    pub allocated_nodes: Vec<String>,
    pub scheduling_time_ms: u64,
    pub resource_utilization: HashMap<String, f32>,
    pub estimated_performance: PerformanceEstimate,
}

/// Performance estimates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    pub expected_throughput: f32,
    pub expected_latency_ms: f32,
    pub expected_efficiency: f32,
    pub confidence_score: f32,
}

/// Scheduling algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SchedulingAlgorithm {
    FirstFit,
    BestFit,
    WorstFit,
    SpreadPlacement,
    BinPack,
    MachineLearning,
    Genetic,
}

/// Workload allocations
#[derive(Debug, Clone)]
pub struct WorkloadAllocation {
    pub workload_id: String,
    pub node_id: String,
    pub resources_allocated: ResourceRequirements,
    pub allocation_time: SystemTime,
}

/// Resource optimizer
#[derive(Debug)]
pub struct ResourceOptimizer {
    pub optimization_policies: Vec<OptimizationPolicy>,
    pub performance_models: HashMap<String, PerformanceModel>,
    pub optimization_history: Vec<OptimizationAction>,
}

/// Optimization policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationPolicy {
    pub policy_id: String,
    pub policy_type: OptimizationPolicyType,
    pub target_metric: String,
    pub optimization_goal: OptimizationGoal,
    pub constraints: Vec<OptimizationConstraint>,
}

/// Optimization policy types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationPolicyType {
    Cost,
    Performance,
    Energy,
    Reliability,
}

/// Optimization goals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationGoal {
    Minimize,
    Maximize,
    Balance,
}

/// Optimization constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationConstraint {
    pub metric: String,
    pub operator: ComparisonOperator,
    pub value: f32,
}

/// Comparison operators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ComparisonOperator {
    LessThan,
    LessThanOrEqual,
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
}

/// Optimization actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationAction {
    pub action_id: String,
    pub action_type: OptimizationActionType,
    pub target_workload: String,
    pub target_node: String,
    pub expected_benefit: f32,
    pub execution_time: SystemTime,
}

/// Optimization action types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationActionType {
    ScaleUp,
    ScaleDown,
    Migrate,
    Rebalance,
    Shutdown,
    StartUp,
}

/// Performance models
#[derive(Debug, Clone)]
pub struct PerformanceModel {
    pub model_id: String,
    pub model_type: PerformanceModelType,
    pub accuracy: f32,
    pub training_data_size: usize,
    pub last_updated: SystemTime,
}

/// Performance model types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PerformanceModelType {
    Regression,
    Classification,
    TimeSeries,
    Simulation,
}

/// Cluster monitoring
#[derive(Debug)]
pub struct ClusterMonitoring {
    pub node_metrics: HashMap<String, NodeMetrics>,
    pub workload_metrics: HashMap<String, WorkloadMetrics>,
    pub cluster_metrics: ClusterMetrics,
    pub alerting_system: AlertingSystem,
}

/// Node metrics
#[derive(Debug, Clone)]
pub struct NodeMetrics {
    pub node_id: String,
    pub cpu_usage_percent: f32,
    pub memory_usage_percent: f32,
    pub storage_usage_percent: f32,
    pub network_usage_mbps: f32,
    pub gpu_usage_percent: f32,
    pub temperature_celsius: f32,
    pub power_consumption_watts: f32,
    pub uptime_seconds: u64,
    pub active_workloads: u32,
    pub health_score: f32,
}

/// Workload metrics
#[derive(Debug, Clone)]
pub struct WorkloadMetrics {
    pub workload_id: String,
    pub cpu_usage_percent: f32,
    pub memory_usage_percent: f32,
    pub network_io_mbps: f32,
    pub disk_io_mbps: f32,
    pub request_rate_per_sec: f32,
    pub error_rate_percent: f32,
    pub response_time_ms: f32,
    pub throughput_ops_per_sec: f32,
    pub availability_percent: f32,
}

/// Cluster metrics
#[derive(Debug, Clone)]
pub struct ClusterMetrics {
    pub total_nodes: u32,
    pub healthy_nodes: u32,
    pub total_workloads: u32,
    pub running_workloads: u32,
    pub failed_workloads: u32,
    pub average_cpu_utilization: f32,
    pub average_memory_utilization: f32,
    pub cluster_efficiency: f32,
    pub fault_rate_percent: f32,
    pub recovery_time_avg_seconds: f32,
}

/// Alerting system for cluster monitoring
#[derive(Debug, Clone)]
pub struct AlertingSystem {
    pub active_alerts: Vec<ClusterAlert>,
    pub alert_rules: Vec<AlertRule>,
    pub notification_channels: Vec<NotificationChannel>,
}

/// Cluster alerts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterAlert {
    pub alert_id: String,
    pub alert_type: ClusterAlertType,
    pub severity: AlertSeverity,
    pub affected_entity: String,
    pub description: String,
    pub recommendations: Vec<String>,
    pub timestamp: SystemTime,
    pub acknowledged: bool,
}

/// Cluster alert types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClusterAlertType {
    NodeFailure,
    HighResourceUsage,
    WorkloadFailure,
    NetworkIssue,
    SecurityViolation,
    CapacityExceeded,
}

/// Alert rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRule {
    pub rule_id: String,
    pub rule_name: String,
    pub condition: AlertCondition,
    pub severity: AlertSeverity,
    pub notification_channels: Vec<NotificationChannel>,
}

/// Alert conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertCondition {
    pub metric: String,
    pub threshold: f32,
    pub operator: ComparisonOperator,
    pub duration: Duration,
}

/// Fault tolerance manager
#[derive(Debug)]
pub struct FaultToleranceManager {
    pub fault_detection: FaultDetectionSystem,
    pub recovery_strategies: HashMap<FaultType, RecoveryStrategy>,
    pub health_checker: HealthCheckerSystem,
    pub disaster_recovery: DisasterRecoverySystem,
}

/// Fault detection system
#[derive(Debug, Clone)]
pub struct FaultDetectionSystem {
    pub detection_algorithms: HashMap<String, FaultDetectionAlgorithm>,
    pub detection_history: Vec<FaultDetection>,
    pub false_positive_rate: f32,
    pub detection_accuracy: f32,
}

/// Fault detection algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FaultDetectionAlgorithm {
    HeartbeatMonitoring,
    ResourceMonitoring,
    PatternRecognition,
    MachineLearning,
    ThresholdBased,
}

/// Fault detections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultDetection {
    pub detection_id: String,
    pub fault_type: FaultType,
    pub affected_entity: String,
    pub confidence_score: f32,
    pub detection_time: SystemTime,
    pub status: DetectionStatus,
}

/// Fault types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FaultType {
    NodeFailure,
    NetworkPartition,
    ResourceExhaustion,
    SoftwareBug,
    HardwareFailure,
    SecurityBreach,
}

/// Detection status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DetectionStatus {
    Detected,
    Confirmed,
    FalsePositive,
    Resolved,
}

/// Recovery strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryStrategy {
    pub strategy_id: String,
    pub fault_types: Vec<FaultType>,
    pub recovery_steps: Vec<RecoveryStep>,
    pub recovery_time_target: Duration,
    pub success_rate: f32,
}

/// Recovery steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryStep {
    pub step_order: u32,
    pub step_name: String,
    pub action: RecoveryAction,
    pub timeout: Duration,
    pub rollback_action: Option<RecoveryAction>,
}

/// Recovery actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecoveryAction {
    RestartService { service_id: String },
    FailoverToNode { target_node: String },
    ScaleOut,
    ScaleIn,
    RouteTraffic { target_service: String },
    NotifyOperator { message: String },
    Custom { action_type: String, parameters: HashMap<String, serde_json::Value> },
}

/// Health checker system
#[derive(Debug, Clone)]
pub struct HealthCheckerSystem {
    pub health_checks: HashMap<String, HealthCheckConfig>,
    pub health_history: Vec<HealthCheckResult>,
    pub check_interval: Duration,
}

/// Health check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckConfig {
    pub check_id: String,
    pub entity_id: String,
    pub check_type: HealthCheckType,
    pub endpoint: Option<String>,
    pub interval: Duration,
    pub timeout: Duration,
    pub failure_threshold: u32,
}

/// Health check results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub result_id: String,
    pub check_id: String,
    pub status: HealthStatus,
    pub response_time_ms: f32,
    pub timestamp: SystemTime,
    pub error_message: Option<String>,
}

/// Health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
    Timeout,
}

/// Disaster recovery system
#[derive(Debug, Clone)]
pub struct DisasterRecoverySystem {
    pub backup_strategies: HashMap<String, BackupStrategy>,
    pub recovery_procedures: HashMap<String, RecoveryProcedure>,
    pub geo_distribution: GeoDistribution,
    pub rto_target: Duration,
    pub rpo_target: Duration,
}

/// Backup strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupStrategy {
    pub strategy_id: String,
    pub data_sources: Vec<String>,
    pub backup_frequency: BackupFrequency,
    pub retention_period: Duration,
    pub backup_location: Vec<String>,
}

/// Recovery procedures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryProcedure {
    pub procedure_id: String,
    pub procedure_name: String,
    pub steps: Vec<RecoveryStep>,
    pub estimated_rto: Duration,
    pub prerequisites: Vec<String>,
}

/// Geographic distribution
#[derive(Debug, Clone)]
pub struct GeoDistribution {
    pub regions: Vec<Region>,
    pub data_replication: HashMap<String, ReplicationConfig>,
    pub latency_optimization: bool,
}

/// Regional information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub region_id: String,
    pub region_name: String,
    pub location: (f64, f64),
    pub availability_zones: Vec<String>,
    pub network_latency_ms: f32,
}

/// Replication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicationConfig {
    pub source_region: String,
    pub target_regions: Vec<String>,
    pub replication_type: ReplicationType,
    pub consistency_level: ConsistencyLevel,
}

/// Replication types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReplicationType {
    Synchronous,
    Asynchronous,
    GeoDistributed,
}

/// Consistency levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConsistencyLevel {
    Strong,
    Eventual,
    Causal,
}

/// Create sample edge cluster
pub fn create_sample_edge_cluster(cluster_id: &str) -> EdgeCluster {
    EdgeCluster {
        cluster_id: cluster_id.to_string(),
        cluster_name: format!("Edge Cluster {}", cluster_id),
        cluster_type: ClusterType::Hybrid,
        master_node: "master-node-001".to_string(),
        worker_nodes: vec!["worker-001".to_string(), "worker-002".to_string(), "worker-003".to_string()],
        cluster_specifications: ClusterSpecifications {
            total_cpu_cores: 32,
            total_memory_gb: 128,
            total_storage_gb: 2048,
            total_gpu_count: 2,
            network_bandwidth_gbps: 10.0,
            max_concurrent_workloads: 100,
            fault_tolerance_level: 3,
            redundancy_factor: 2,
        },
        orchestration_config: OrchestrationConfig {
            scheduler_type: SchedulerType::AIOptimized,
            load_balancing_algorithm: LoadBalancingAlgorithm::MachineLearning,
            resource_sharing: ResourceSharingPolicy::WorkloadAware,
            auto_scaling: AutoScalingConfig {
                enabled: true,
                min_nodes: 2,
                max_nodes: 10,
                scale_up_threshold: 80.0,
                scale_down_threshold: 30.0,
                cooldown_period_minutes: 10,
                scaling_policy: ScalingPolicy::Predictive,
            },
            failover_strategy: FailoverStrategy::NPlusOne,
            deployment_strategy: DeploymentStrategy::Rolling,
        },
        monitoring_config: MonitoringConfig {
            metrics_collection_interval: Duration::from_secs(30),
            log_aggregation: true,
            alerting_enabled: true,
            performance_profiling: true,
            capacity_planning: true,
            anomaly_detection: true,
        },
        security_config: ClusterSecurityConfig {
            encryption_enabled: true,
            mutual_tls: true,
            certificate_management: CertificateManagement {
                certificate_authority: "cluster-ca".to_string(),
                certificate_rotation_days: 30,
                automated_renewal: true,
                certificate_store: "/etc/pki/cluster".to_string(),
            },
            access_control: AccessControl {
                authentication_method: AuthenticationMethod::Certificate,
                authorization_model: AuthorizationModel::RoleBased,
                role_based_access: true,
                multi_factor_auth: false,
            },
            network_isolation: true,
            security_monitoring: SecurityMonitoring {
                intrusion_detection: true,
                vulnerability_scanning: true,
                threat_intelligence: true,
                security_events: VecDeque::with_capacity(1000),
            },
        },
        networking_config: NetworkingConfig {
            overlay_network: OverlayNetwork {
                network_type: OverlayNetworkType::Vxlan,
                network_cidr: "10.0.0.0/16".to_string(),
                encapsulation: EncapsulationType::VniVxlan,
                encryption: true,
            },
            service_mesh: ServiceMeshConfig {
                mesh_enabled: true,
                mesh_provider: MeshProvider::Istio,
                traffic_policy: TrafficPolicy {
                    load_balancing: LoadBalancingAlgorithm::LatencyBased,
                    circuit_breaker: CircuitBreakerConfig {
                        failure_threshold: 5,
                        timeout_seconds: 30,
                        reset_timeout_seconds: 60,
                        half_open_max_calls: 10,
                    },
                    retry_policy: RetryPolicyConfig {
                        max_attempts: 3,
                        backoff_multiplier: 2.0,
                        initial_timeout_ms: 1000,
                        max_timeout_ms: 30000,
                    },
                    timeout_policy: TimeoutPolicyConfig {
                        request_timeout_ms: 30000,
                        idle_timeout_ms: 90000,
                        keepalive_timeout_ms: 120000,
                    },
                },
                security_policy: MeshSecurityPolicy {
                    mtls_enabled: true,
                    mutual_authentication: true,
                    authorization_policies: Vec::new(),
                },
            },
            network_policies: vec![
                NetworkPolicy {
                    policy_id: "default-deny".to_string(),
                    name: "Default Deny All".to_string(),
                    policy_type: NetworkPolicyType::Bidirectional,
                    pod_selector: PodSelector {
                        labels: HashMap::new(),
                        namespace: None,
                    },
                    ingress_rules: Vec::new(),
                    egress_rules: Vec::new(),
                }
            ],
            traffic_shaping: TrafficShapingConfig {
                bandwidth_limits: HashMap::new(),
                quality_of_service: QualityOfServiceConfig {
                    traffic_classes: vec![
                        TrafficClass {
                            class_name: "high-priority".to_string(),
                            priority: 1,
                            bandwidth_guarantee: 100.0,
                            latency_sensitive: true,
                        }
                    ],
                    priority_mapping: HashMap::from([
                        ("critical".to_string(), 1),
                        ("normal".to_string(), 2),
                        ("batch".to_string(), 3),
                    ]),
                },
                congestion_control: CongestionControlConfig {
                    algorithm: CongestionControlAlgorithm::FqCoDel,
                    buffer_size_kb: 512,
                    drop_policy: DropPolicy::RandomEarlyDetection,
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_cluster_creation() {
        let cluster = create_sample_edge_cluster("test-cluster-001");
        assert_eq!(cluster.cluster_id, "test-cluster-001");
        assert_eq!(cluster.cluster_type, ClusterType::Hybrid);
        assert_eq!(cluster.worker_nodes.len(), 3);
        assert!(cluster.orchestration_config.auto_scaling.enabled);
    }

    #[test]
    fn test_workload_creation() {
        let workload = EdgeWorkload {
            workload_id: "web-service-001".to_string(),
            workload_name: "Web Service".to_string(),
            workload_type: WorkloadType::WebService,
            container_images: vec![
                ContainerImage {
                    name: "nginx".to_string(),
                    tag: "latest".to_string(),
                    registry: "docker.io".to_string(),
                    pull_policy: PullPolicy::Always,
                    digest: None,
                }
            ],
            resource_requirements: ResourceRequirements {
                cpu_cores: 1.0,
                memory_mb: 512,
                storage_gb: 1,
                gpu_requirements: None,
                network_bandwidth_mbps: 10.0,
                special_devices: Vec::new(),
            },
            deployment_config: DeploymentConfiguration {
                replicas: 3,
                deployment_strategy: DeploymentStrategy::Rolling,
                health_checks: Vec::new(),
                restart_policy: RestartPolicy::Always,
                tolerations: Vec::new(),
            },
            networking_config: WorkloadNetworkingConfig {
                service_type: ServiceType::ClusterIP,
                ports: vec![
                    ServicePort {
                        name: "http".to_string(),
                        port: 80,
                        target_port: Some(80),
                        protocol: Protocol::Tcp,
                    }
                ],
                ingress_config: None,
                dns_name: Some("web-service.local".to_string()),
            },
            security_config: WorkloadSecurityConfig {
                security_context: SecurityContext {
                    run_as_non_root: true,
                    run_as_user: Some(1000),
                    capabilities: Vec::new(),
                    allow_privilege_escalation: false,
                    read_only_root_filesystem: true,
                },
                secrets: Vec::new(),
                certificates: Vec::new(),
            },
            scheduling_constraints: SchedulingConstraints {
                node_selector: HashMap::from([
                    ("node-type".to_string(), "worker".to_string()),
                ]),
                affinity_rules: Vec::new(),
                anti_affinity_rules: Vec::new(),
                topology_spread_constraints: Vec::new(),
            },
        };

        assert_eq!(workload.workload_type, WorkloadType::WebService);
        assert_eq!(workload.resource_requirements.cpu_cores, 1.0);
        assert!(workload.security_config.security_context.run_as_non_root);
    }

    #[test]
    fn test_resource_requirements() {
        let req = ResourceRequirements {
            cpu_cores: 2.0,
            memory_mb: 2048,
            storage_gb: 10,
            gpu_requirements: Some(GpuRequirements {
                gpu_model: Some("NVIDIA T4".to_string()),
                gpu_count: 1,
                memory_mb: 16384,
                compute_capability: Some("7.5".to_string()),
            }),
            network_bandwidth_mbps: 100.0,
            special_devices: vec!["gpu".to_string()],
        };

        assert!(req.gpu_requirements.is_some());
        assert_eq!(req.gpu_requirements.as_ref().unwrap().gpu_count, 1);
        assert_eq!(req.gpu_requirements.as_ref().unwrap().gpu_model, Some("NVIDIA T4".to_string()));
    }

    #[test]
    fn test_scheduling_constraints() {
        let constraints = SchedulingConstraints {
            node_selector: HashMap::from([
                ("node-type".to_string(), "worker".to_string()),
                ("zone".to_string(), "us-west-1".to_string()),
            ]),
            affinity_rules: Vec::new(),
            anti_affinity_rules: Vec::new(),
            topology_spread_constraints: Vec::new(),
        };

        assert_eq!(constraints.node_selector.get("node-type"), Some(&"worker".to_string()));
        assert_eq!(constraints.node_selector.get("zone"), Some(&"us-west-1".to_string()));
    }

    #[test]
    fn test_auto_scaling_config() {
        let config = AutoScalingConfig {
            enabled: true,
            min_nodes: 2,
            max_nodes: 20,
            scale_up_threshold: 75.0,
            scale_down_threshold: 25.0,
            cooldown_period_minutes: 15,
            scaling_policy: ScalingPolicy::CostOptimized,
        };

        assert!(config.enabled);
        assert_eq!(config.min_nodes, 2);
        assert_eq!(config.max_nodes, 20);
        assert_eq!(config.scale_up_threshold, 75.0);
        assert_eq!(config.scaling_policy, ScalingPolicy::CostOptimized);
    }
}