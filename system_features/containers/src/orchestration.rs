//! Container Orchestration Engine
//! 
//! This module provides comprehensive container orchestration capabilities for
//! managing multiple containers, service discovery, load balancing, and scaling.

use super::*;
use std::collections::{HashMap, HashSet};
use tokio::sync::{RwLock, broadcast};

/// Orchestration Engine - Handles multi-container orchestration
pub struct OrchestrationEngine {
    services: Arc<RwLock<HashMap<String, ServiceDefinition>>>,
    deployments: Arc<RwLock<HashMap<String, Deployment>>>,
    service_registry: Arc<RwLock<ServiceRegistry>>,
    load_balancer: Arc<LoadBalancer>,
    health_checker: Arc<HealthChecker>,
    scaling_manager: Arc<ScalingManager>,
    event_bus: broadcast::Sender<OrchestrationEvent>,
}

/// Service definition for orchestration
#[derive(Debug, Clone)]
pub struct ServiceDefinition {
    pub id: String,
    pub name: String,
    pub image: String,
    pub version: String,
    pub replicas: usize,
    pub resource_requirements: ResourceRequirements,
    pub port_mappings: Vec<PortMapping>,
    pub environment: HashMap<String, String>,
    pub dependencies: Vec<String>,
    pub health_check: HealthCheckConfig,
    pub scaling_policy: ScalingPolicy,
    pub networking: ServiceNetworking,
    pub volumes: Vec<VolumeMapping>,
    pub labels: HashMap<String, String>,
    pub created_at: SystemTime,
}

/// Deployment configuration
#[derive(Debug, Clone)]
pub struct Deployment {
    pub id: String,
    pub service_id: String,
    pub status: DeploymentStatus,
    pub strategy: DeploymentStrategy,
    pub revision: u32,
    pub containers: HashMap<String, ContainerInstance>,
    pub rollback_history: Vec<DeploymentRevision>,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// Container instance information
#[derive(Debug, Clone)]
pub struct ContainerInstance {
    pub id: String,
    pub container_id: String, // MultiOS container ID
    pub pod_id: String,
    pub node_id: String,
    pub status: ContainerStatus,
    pub health: HealthStatus,
    pub resource_usage: ResourceUsage,
    pub restart_count: u32,
    pub started_at: SystemTime,
    pub ready_at: Option<SystemTime>,
}

/// Resource requirements for services
#[derive(Debug, Clone)]
pub struct ResourceRequirements {
    pub cpu_request: Option<f64>,
    pub cpu_limit: Option<f64>,
    pub memory_request: Option<u64>,
    pub memory_limit: Option<u64>,
    pub disk_request: Option<u64>,
    pub disk_limit: Option<u64>,
    pub network_bandwidth: Option<u64>,
}

/// Service networking configuration
#[derive(Debug, Clone)]
pub struct ServiceNetworking {
    pub cluster_ip: Option<IpAddr>,
    pub external_ip: Option<IpAddr>,
    pub load_balancer_ip: Option<IpAddr>,
    pub dns_name: String,
    pub service_type: ServiceType,
    pub session_affinity: SessionAffinity,
}

/// Scaling policy configuration
#[derive(Debug, Clone)]
pub struct ScalingPolicy {
    pub min_replicas: usize,
    pub max_replicas: usize,
    pub target_cpu_utilization: Option<f64>,
    pub target_memory_utilization: Option<f64>,
    pub scale_up_policy: ScalePolicy,
    pub scale_down_policy: ScalePolicy,
}

/// Scale policy definition
#[derive(Debug, Clone)]
pub struct ScalePolicy {
    pub stabilization_window_seconds: u32,
    pub policies: Vec<ScalePolicyRule>,
}

/// Scale policy rule
#[derive(Debug, Clone)]
pub struct ScalePolicyRule {
    pub type_: ScalePolicyType,
    pub value: f64,
    pub period_seconds: u32,
}

/// Health check configuration
#[derive(Debug, Clone)]
pub struct HealthCheckConfig {
    pub http_get: Option<HttpHealthCheck>,
    pub tcp_connect: Option<TcpHealthCheck>,
    pub exec: Option<ExecHealthCheck>,
    pub initial_delay_seconds: u32,
    pub period_seconds: u32,
    pub timeout_seconds: u32,
    pub success_threshold: u32,
    pub failure_threshold: u32,
}

/// HTTP health check
#[derive(Debug, Clone)]
pub struct HttpHealthCheck {
    pub path: String,
    pub port: u16,
    pub scheme: String,
    pub host: Option<String>,
    pub headers: HashMap<String, String>,
}

/// TCP health check
#[derive(Debug, Clone)]
pub struct TcpHealthCheck {
    pub port: u16,
    pub host: Option<String>,
}

/// Exec health check
#[derive(Debug, Clone)]
pub struct ExecHealthCheck {
    pub command: Vec<String>,
    pub working_dir: Option<String>,
    pub env: HashMap<String, String>,
}

impl OrchestrationEngine {
    /// Create a new orchestration engine
    pub fn new() -> Self {
        let (event_bus, _) = broadcast::channel(1000);
        
        Self {
            services: Arc::new(RwLock::new(HashMap::new())),
            deployments: Arc::new(RwLock::new(HashMap::new())),
            service_registry: Arc::new(RwLock::new(ServiceRegistry::new())),
            load_balancer: Arc::new(LoadBalancer::new()),
            health_checker: Arc::new(HealthChecker::new()),
            scaling_manager: Arc::new(ScalingManager::new()),
            event_bus,
        }
    }

    /// Start the orchestration engine
    pub async fn start(&self) -> ContainerResult<()> {
        // Start background tasks
        self.start_health_checking().await?;
        self.start_scaling().await?;
        self.start_service_discovery().await?;
        
        Ok(())
    }

    /// Deploy a service
    pub async fn deploy_service(&self, service_def: ServiceDefinition) -> ContainerResult<String> {
        log::info!("Deploying service {}", service_def.name);

        // Validate service definition
        self.validate_service_definition(&service_def)?;

        // Create deployment
        let deployment_id = self.create_deployment(&service_def).await?;

        // Start containers
        self.scale_service(&service_def.id, service_def.replicas).await?;

        // Register service
        {
            let mut services = self.services.write().await;
            services.insert(service_def.id.clone(), service_def);
        }

        log::info!("Service {} deployed successfully", service_def.name);
        Ok(deployment_id)
    }

    /// Update an existing service
    pub async fn update_service(&self, service_id: &str, new_service_def: ServiceDefinition) -> ContainerResult<()> {
        log::info!("Updating service {}", service_id);

        // Get current service
        let services = self.services.read().await;
        let current_service = services.get(service_id)
            .ok_or(ContainerError::NotFound(format!("Service {} not found", service_id)))?;

        // Create rolling update
        self.perform_rolling_update(service_id, current_service, &new_service_def).await?;

        // Update service definition
        {
            let mut services = self.services.write().await;
            services.insert(service_id.to_string(), new_service_def);
        }

        log::info!("Service {} updated successfully", service_id);
        Ok(())
    }

    /// Scale a service
    pub async fn scale_service(&self, service_id: &str, target_replicas: usize) -> ContainerResult<()> {
        log::info!("Scaling service {} to {} replicas", service_id, target_replicas);

        let services = self.services.read().await;
        let service = services.get(service_id)
            .ok_or(ContainerError::NotFound(format!("Service {} not found", service_id)))?;

        let deployments = self.deployments.read().await;
        let deployment = deployments.get(&format!("deploy-{}", service_id))
            .ok_or(ContainerError::NotFound(format!("Deployment for service {} not found", service_id)))?;

        let current_replicas = deployment.containers.len();
        let replicas_to_add = target_replicas.saturating_sub(current_replicas);
        let replicas_to_remove = current_replicas.saturating_sub(target_replicas);

        // Add replicas
        for _ in 0..replicas_to_add {
            self.add_container_instance(service_id, deployment.id.clone()).await?;
        }

        // Remove replicas
        for _ in 0..replicas_to_remove {
            self.remove_container_instance(service_id).await?;
        }

        log::info!("Service {} scaled to {} replicas", service_id, target_replicas);
        Ok(())
    }

    /// Get service status
    pub async fn get_service_status(&self, service_id: &str) -> ContainerResult<ServiceStatus> {
        let services = self.services.read().await;
        let service = services.get(service_id)
            .ok_or(ContainerError::NotFound(format!("Service {} not found", service_id)))?;

        let deployments = self.deployments.read().await;
        let deployment = deployments.get(&format!("deploy-{}", service_id))
            .ok_or(ContainerError::NotFound(format!("Deployment for service {} not found", service_id)))?;

        let mut container_statuses = HashMap::new();
        let mut total_replicas = 0;
        let mut ready_replicas = 0;
        let mut healthy_replicas = 0;

        for (container_id, instance) in &deployment.containers {
            total_replicas += 1;
            
            let status = match instance.status {
                ContainerStatus::Running => {
                    ready_replicas += 1;
                    "Running"
                },
                ContainerStatus::Pending => "Pending",
                ContainerStatus::Failed => "Failed",
                ContainerStatus::Terminating => "Terminating",
                ContainerStatus::Unknown => "Unknown",
            };

            if matches!(instance.health, HealthStatus::Healthy) {
                healthy_replicas += 1;
            }

            container_statuses.insert(container_id.clone(), status.to_string());
        }

        Ok(ServiceStatus {
            service_id: service_id.to_string(),
            name: service.name.clone(),
            replicas: total_replicas,
            ready_replicas,
            available_replicas: healthy_replicas,
            updated_replicas: ready_replicas,
            observed_generation: deployment.revision,
            conditions: vec![
                ServiceCondition {
                    type_: "Available".to_string(),
                    status: "True".to_string(),
                    reason: None,
                    message: None,
                }
            ],
            container_statuses,
        })
    }

    /// List all services
    pub async fn list_services(&self) -> Vec<ServiceInfo> {
        let services = self.services.read().await;
        let deployments = self.deployments.read().await;

        services.values().map(|service| {
            let deployment = deployments.get(&format!("deploy-{}", service.id));
            let replicas = deployment.map(|d| d.containers.len()).unwrap_or(0);
            let ready_replicas = deployment.map(|d| d.containers.values().filter(|i| 
                matches!(i.status, ContainerStatus::Running)
            ).count()).unwrap_or(0);

            ServiceInfo {
                id: service.id.clone(),
                name: service.name.clone(),
                replicas,
                ready_replicas,
                image: service.image.clone(),
                created_at: service.created_at,
            }
        }).collect()
    }

    /// Delete a service
    pub async fn delete_service(&self, service_id: &str, force: bool) -> ContainerResult<()> {
        log::info!("Deleting service {}", service_id);

        // Scale down to 0 replicas
        self.scale_service(service_id, 0).await?;

        // Remove service and deployment
        {
            let mut services = self.services.write().await;
            let mut deployments = self.deployments.write().await;
            
            services.remove(service_id);
            deployments.remove(&format!("deploy-{}", service_id));
        }

        // Cleanup service registry
        {
            let mut registry = self.service_registry.write().await;
            registry.remove_service(service_id);
        }

        log::info!("Service {} deleted successfully", service_id);
        Ok(())
    }

    /// Get service logs
    pub async fn get_service_logs(&self, service_id: &str, container_id: Option<String>) -> ContainerResult<String> {
        let deployments = self.deployments.read().await;
        let deployment = deployments.get(&format!("deploy-{}", service_id))
            .ok_or(ContainerError::NotFound(format!("Deployment for service {} not found", service_id)))?;

        let mut logs = String::new();

        for (id, instance) in &deployment.containers {
            if container_id.is_some() && Some(id) != container_id.as_ref() {
                continue;
            }

            // Get container logs (this would interface with the container manager)
            // let container_logs = self.get_container_logs(id).await?;
            // logs.push_str(&format!("=== Container {} ===\n{}\n", id, container_logs));

            // For now, just add a placeholder
            logs.push_str(&format!("=== Container {} ===\n[Logs would be retrieved here]\n", id));
        }

        Ok(logs)
    }

    /// Execute command in a service container
    pub async fn exec_in_service(&self, service_id: &str, container_id: Option<String>, 
                               command: Vec<String>) -> ContainerResult<String> {
        let deployments = self.deployments.read().await;
        let deployment = deployments.get(&format!("deploy-{}", service_id))
            .ok_or(ContainerError::NotFound(format!("Deployment for service {} not found", service_id)))?;

        let target_container_id = if let Some(container_id) = container_id {
            container_id
        } else {
            // Use the first running container
            deployment.containers.values()
                .find(|i| matches!(i.status, ContainerStatus::Running))
                .ok_or(ContainerError::InvalidConfig("No running containers found".to_string()))?
                .container_id.clone()
        };

        // Execute command in the container
        // This would interface with the container manager's exec function
        // let output = self.container_manager.exec_in_container(&target_container_id, command, None).await?;
        
        // For now, return a placeholder
        Ok(format!("Command executed in container {}: {:?}", target_container_id, command))
    }

    // Private helper methods

    fn validate_service_definition(&self, service_def: &ServiceDefinition) -> ContainerResult<()> {
        // Validate service name
        if service_def.name.is_empty() {
            return Err(ContainerError::InvalidConfig("Service name cannot be empty".to_string()));
        }

        // Validate replicas
        if service_def.replicas == 0 {
            return Err(ContainerError::InvalidConfig("Service must have at least 1 replica".to_string()));
        }

        // Validate resource requirements
        if let Some(cpu_limit) = service_def.resource_requirements.cpu_limit {
            if let Some(cpu_request) = service_def.resource_requirements.cpu_request {
                if cpu_request > cpu_limit {
                    return Err(ContainerError::InvalidConfig(
                        "CPU request cannot exceed CPU limit".to_string()
                    ));
                }
            }
        }

        if let Some(mem_limit) = service_def.resource_requirements.memory_limit {
            if let Some(mem_request) = service_def.resource_requirements.memory_request {
                if mem_request > mem_limit {
                    return Err(ContainerError::InvalidConfig(
                        "Memory request cannot exceed memory limit".to_string()
                    ));
                }
            }
        }

        // Validate health check configuration
        let health_check = &service_def.health_check;
        if health_check.http_get.is_none() && health_check.tcp_connect.is_none() && health_check.exec.is_none() {
            log::warn!("Service {} has no health check configured", service_def.name);
        }

        Ok(())
    }

    async fn create_deployment(&self, service_def: &ServiceDefinition) -> ContainerResult<String> {
        let deployment_id = format!("deploy-{}", service_def.id);
        let deployment = Deployment {
            id: deployment_id.clone(),
            service_id: service_def.id.clone(),
            status: DeploymentStatus::InProgress,
            strategy: DeploymentStrategy::RollingUpdate,
            revision: 1,
            containers: HashMap::new(),
            rollback_history: vec![],
            created_at: SystemTime::now(),
            updated_at: SystemTime::now(),
        };

        {
            let mut deployments = self.deployments.write().await;
            deployments.insert(deployment_id, deployment);
        }

        Ok(deployment_id)
    }

    async fn add_container_instance(&self, service_id: &str, deployment_id: String) -> ContainerResult<String> {
        let container_instance_id = format!("{}-{}", service_id, uuid::Uuid::new_v4());
        
        // Create container configuration from service definition
        let services = self.services.read().await;
        let service = services.get(service_id)
            .ok_or(ContainerError::NotFound(format!("Service {} not found", service_id)))?;

        let container_config = self.service_to_container_config(service, &container_instance_id)?;

        // Create the container (this would interface with the container manager)
        // let container_id = self.container_manager.create_container(container_config).await?;
        
        // For now, use the instance ID as container ID
        let container_id = container_instance_id.clone();

        // Add to deployment
        {
            let mut deployments = self.deployments.write().await;
            if let Some(deployment) = deployments.get_mut(&deployment_id) {
                deployment.containers.insert(container_instance_id.clone(), ContainerInstance {
                    id: container_instance_id.clone(),
                    container_id,
                    pod_id: format!("pod-{}", container_instance_id),
                    node_id: "localhost".to_string(), // Simplified
                    status: ContainerStatus::Pending,
                    health: HealthStatus::Unknown,
                    resource_usage: ResourceUsage {
                        cpu_usage: 0.0,
                        memory_usage: 0,
                        disk_usage: 0,
                        network_usage: 0,
                    },
                    restart_count: 0,
                    started_at: SystemTime::now(),
                    ready_at: None,
                });
            }
        }

        Ok(container_instance_id)
    }

    async fn remove_container_instance(&self, service_id: &str) -> ContainerResult<()> {
        let deployments = self.deployments.read().await;
        let deployment = deployments.get(&format!("deploy-{}", service_id))
            .ok_or(ContainerError::NotFound(format!("Deployment for service {} not found", service_id)))?;

        // Find a container to remove
        let container_to_remove = deployment.containers.values()
            .find(|i| matches!(i.status, ContainerStatus::Running))
            .ok_or(ContainerError::InvalidConfig("No running containers to remove".to_string()))?;

        // Stop and remove the container (this would interface with the container manager)
        // self.container_manager.stop_container(&container_to_remove.container_id, Some(Duration::from_secs(30))).await?;
        // self.container_manager.remove_container(&container_to_remove.container_id, false).await?;

        // Remove from deployment
        {
            let mut deployments = self.deployments.write().await;
            if let Some(deployment) = deployments.get_mut(&format!("deploy-{}", service_id)) {
                deployment.containers.remove(&container_to_remove.id);
            }
        }

        Ok(())
    }

    fn service_to_container_config(&self, service: &ServiceDefinition, container_id: &str) -> ContainerResult<ContainerConfig> {
        Ok(ContainerConfig {
            container_id: container_id.to_string(),
            name: format!("{}-{}", service.name, container_id.split('-').last().unwrap_or("")),
            image: service.image.clone(),
            command: vec![], // Use image's default entrypoint
            environment: service.environment.clone(),
            ports: service.port_mappings.clone(),
            volumes: service.volumes.clone(),
            resource_limits: ResourceLimits {
                cpu_cores: service.resource_requirements.cpu_limit,
                memory_bytes: service.resource_requirements.memory_limit,
                disk_bytes: service.resource_requirements.disk_limit,
                network_bandwidth: service.resource_requirements.network_bandwidth,
                file_descriptors: None,
                processes: None,
            },
            security: SecurityConfig::default(),
            network: NetworkConfig {
                network_mode: NetworkMode::Bridge,
                bridge_name: Some("multios-br0".to_string()),
                ip_address: None,
                mac_address: None,
                dns_servers: vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()],
                port_mappings: service.port_mappings.clone(),
            },
            namespace_mode: NamespaceMode::default(),
            template_id: None,
            created_at: Utc::now(),
        })
    }

    async fn perform_rolling_update(&self, service_id: &str, old_service: &ServiceDefinition, 
                                   new_service: &ServiceDefinition) -> ContainerResult<()> {
        // This would perform a rolling update of containers
        // For now, just implement a simplified version

        log::info!("Performing rolling update for service {}", service_id);

        // Get current deployment
        let deployments = self.deployments.read().await;
        let deployment = deployments.get(&format!("deploy-{}", service_id))
            .ok_or(ContainerError::NotFound(format!("Deployment for service {} not found", service_id)))?;

        let current_replicas = deployment.containers.len();
        let target_replicas = new_service.replicas;

        // Scale up if needed
        if current_replicas < target_replicas {
            for _ in current_replicas..target_replicas {
                self.add_container_instance(service_id, deployment.id.clone()).await?;
            }
        }

        // Scale down if needed
        if current_replicas > target_replicas {
            for _ in target_replicas..current_replicas {
                self.remove_container_instance(service_id).await?;
            }
        }

        Ok(())
    }

    async fn start_health_checking(&self) -> ContainerResult<()> {
        // Start health checking background task
        let health_checker = self.health_checker.clone();
        tokio::spawn(async move {
            health_checker.start_monitoring().await;
        });

        Ok(())
    }

    async fn start_scaling(&self) -> ContainerResult<()> {
        // Start scaling background task
        let scaling_manager = self.scaling_manager.clone();
        let services = self.services.clone();
        tokio::spawn(async move {
            loop {
                scaling_manager.check_scaling_needs(&services).await;
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
        });

        Ok(())
    }

    async fn start_service_discovery(&self) -> ContainerResult<()> {
        // Start service discovery background task
        let service_registry = self.service_registry.clone();
        tokio::spawn(async move {
            loop {
                // Update service registry with current service status
                // This would be more complex in a real implementation
                tokio::time::sleep(Duration::from_secs(10)).await;
            }
        });

        Ok(())
    }
}

/// Service registry for service discovery
#[derive(Debug)]
pub struct ServiceRegistry {
    services: HashMap<String, ServiceEndpoint>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    pub fn register_service(&mut self, service_id: String, endpoints: Vec<ServiceEndpoint>) {
        self.services.insert(service_id, ServiceEndpoint {
            service_id,
            endpoints,
            registered_at: SystemTime::now(),
        });
    }

    pub fn remove_service(&mut self, service_id: &str) {
        self.services.remove(service_id);
    }

    pub fn get_service(&self, service_id: &str) -> Option<&ServiceEndpoint> {
        self.services.get(service_id)
    }
}

/// Service endpoint information
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    pub service_id: String,
    pub endpoints: Vec<Endpoint>,
    pub registered_at: SystemTime,
}

/// Endpoint definition
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub target: String,
}

/// Load balancer implementation
#[derive(Debug)]
pub struct LoadBalancer {
    algorithms: HashMap<String, Box<dyn LoadBalancingAlgorithm + Send + Sync>>,
    active_sessions: HashMap<String, SessionInfo>,
}

impl LoadBalancer {
    pub fn new() -> Self {
        let mut algorithms = HashMap::new();
        algorithms.insert("round_robin".to_string(), Box::new(RoundRobinAlgorithm::new()) as Box<dyn LoadBalancingAlgorithm + Send + Sync>);
        algorithms.insert("least_connections".to_string(), Box::new(LeastConnectionsAlgorithm::new()) as Box<dyn LoadBalancingAlgorithm + Send + Sync>);
        algorithms.insert("random".to_string(), Box::new(RandomAlgorithm::new()) as Box<dyn LoadBalancingAlgorithm + Send + Sync>);

        Self {
            algorithms,
            active_sessions: HashMap::new(),
        }
    }

    pub fn select_backend(&self, service_id: &str, algorithm: &str) -> Option<String> {
        if let Some(algo) = self.algorithms.get(algorithm) {
            algo.select_backend(service_id)
        } else {
            None
        }
    }
}

/// Load balancing algorithm trait
pub trait LoadBalancingAlgorithm {
    fn select_backend(&self, service_id: &str) -> Option<String>;
}

/// Round robin algorithm
#[derive(Debug)]
pub struct RoundRobinAlgorithm {
    counter: std::sync::atomic::AtomicUsize,
}

impl RoundRobinAlgorithm {
    pub fn new() -> Self {
        Self {
            counter: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

impl LoadBalancingAlgorithm for RoundRobinAlgorithm {
    fn select_backend(&self, _service_id: &str) -> Option<String> {
        let count = self.counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Some(format!("backend-{}", count % 3)) // Simplified
    }
}

/// Least connections algorithm
#[derive(Debug)]
pub struct LeastConnectionsAlgorithm;

impl LeastConnectionsAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl LoadBalancingAlgorithm for LeastConnectionsAlgorithm {
    fn select_backend(&self, _service_id: &str) -> Option<String> {
        Some("backend-0".to_string()) // Simplified
    }
}

/// Random algorithm
#[derive(Debug)]
pub struct RandomAlgorithm {
    rng: std::collections::hash_map::DefaultHasher,
}

impl RandomAlgorithm {
    pub fn new() -> Self {
        Self {
            rng: std::collections::hash_map::DefaultHasher::new(),
        }
    }
}

impl LoadBalancingAlgorithm for RandomAlgorithm {
    fn select_backend(&self, _service_id: &str) -> Option<String> {
        let backend_id = (rand::random::<u32>() % 3) as usize;
        Some(format!("backend-{}", backend_id))
    }
}

/// Session information
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub session_id: String,
    pub backend: String,
    pub created_at: SystemTime,
    pub last_access: SystemTime,
    pub ttl: Duration,
}

/// Health checker
#[derive(Debug)]
pub struct HealthChecker;

impl HealthChecker {
    pub fn new() -> Self {
        Self
    }

    pub async fn start_monitoring(&self) {
        // This would implement health checking for all containers
        loop {
            log::debug!("Running health checks");
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
    }
}

/// Scaling manager
#[derive(Debug)]
pub struct ScalingManager;

impl ScalingManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn check_scaling_needs(&self, services: &Arc<RwLock<HashMap<String, ServiceDefinition>>>) {
        // This would analyze resource usage and make scaling decisions
        log::debug!("Checking scaling needs");
        
        // Simplified implementation - in reality this would analyze metrics
        // and make intelligent scaling decisions
    }
}

/// Service status information
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    pub service_id: String,
    pub name: String,
    pub replicas: usize,
    pub ready_replicas: usize,
    pub available_replicas: usize,
    pub updated_replicas: usize,
    pub observed_generation: u32,
    pub conditions: Vec<ServiceCondition>,
    pub container_statuses: HashMap<String, String>,
}

/// Service condition
#[derive(Debug, Clone)]
pub struct ServiceCondition {
    pub type_: String,
    pub status: String,
    pub reason: Option<String>,
    pub message: Option<String>,
}

/// Service information for listing
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub replicas: usize,
    pub ready_replicas: usize,
    pub image: String,
    pub created_at: SystemTime,
}

/// Deployment status
#[derive(Debug, Clone)]
pub enum DeploymentStatus {
    InProgress,
    Complete,
    Failed,
    Unknown,
}

/// Deployment strategy
#[derive(Debug, Clone)]
pub enum DeploymentStrategy {
    RollingUpdate,
    Recreate,
    BlueGreen,
}

/// Deployment revision
#[derive(Debug, Clone)]
pub struct DeploymentRevision {
    pub revision: u32,
    pub created_at: SystemTime,
    pub service_config: ServiceDefinition,
}

/// Container status
#[derive(Debug, Clone)]
pub enum ContainerStatus {
    Pending,
    Running,
    Failed,
    Terminating,
    Unknown,
}

/// Health status
#[derive(Debug, Clone)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Unknown,
}

/// Service type
#[derive(Debug, Clone)]
pub enum ServiceType {
    ClusterIP,
    NodePort,
    LoadBalancer,
    ExternalName,
}

/// Session affinity
#[derive(Debug, Clone)]
pub struct SessionAffinity {
    pub enabled: bool,
    pub client_ip: bool,
    pub cookie_name: Option<String>,
    pub timeout_seconds: Option<u32>,
}

/// Scale policy type
#[derive(Debug, Clone)]
pub enum ScalePolicyType {
    Pods,
    Percent,
}

/// Orchestration event
#[derive(Debug, Clone)]
pub struct OrchestrationEvent {
    pub event_type: OrchestrationEventType,
    pub service_id: String,
    pub container_id: Option<String>,
    pub timestamp: SystemTime,
    pub data: serde_json::Value,
}

/// Orchestration event types
#[derive(Debug, Clone)]
pub enum OrchestrationEventType {
    ServiceCreated,
    ServiceUpdated,
    ServiceDeleted,
    ContainerStarted,
    ContainerStopped,
    ContainerFailed,
    HealthCheckPassed,
    HealthCheckFailed,
    ScalingTriggered,
}