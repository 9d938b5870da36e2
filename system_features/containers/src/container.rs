//! Container Management Core
//! 
//! This module provides the core container management functionality including
//! creation, lifecycle management, and coordination of container resources.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{RwLock, Semaphore};

use super::*;
use anyhow::Result;
use uuid::Uuid;

const CONTAINER_ROOT_PATH: &str = "/var/lib/multios/containers";
const CONTAINER_CONFIG_PATH: &str = "/etc/multios/containers";

/// Container Manager - Central orchestrator for all container operations
pub struct ContainerManager {
    containers: Arc<RwLock<HashMap<String, Container>>>,
    resource_manager: Arc<resource_manager::ResourceManager>,
    network_manager: Arc<network_manager::NetworkManager>,
    image_manager: Arc<image_manager::ImageManager>,
    security_manager: Arc<security::SecurityManager>,
    lifecycle_manager: Arc<lifecycle::LifecycleManager>,
    orchestration: Arc<orchestration::OrchestrationEngine>,
    config: ContainerManagerConfig,
}

/// Configuration for the container manager
#[derive(Debug, Clone)]
pub struct ContainerManagerConfig {
    pub max_containers: usize,
    pub default_resource_limits: ResourceLimits,
    pub cleanup_interval: Duration,
    pub monitoring_enabled: bool,
    pub audit_enabled: bool,
}

impl Default for ContainerManagerConfig {
    fn default() -> Self {
        Self {
            max_containers: 1000,
            default_resource_limits: ResourceLimits::default(),
            cleanup_interval: Duration::from_secs(60),
            monitoring_enabled: true,
            audit_enabled: true,
        }
    }
}

/// Container Structure - Represents a single container instance
#[derive(Debug, Clone)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub state: ContainerState,
    pub config: ContainerConfig,
    pub runtime_data: RuntimeData,
    pub created_at: SystemTime,
    pub started_at: Option<SystemTime>,
    pub stats: ContainerStats,
    pub pid: Option<u32>,
}

/// Runtime data specific to container execution
#[derive(Debug, Clone)]
pub struct RuntimeData {
    pub process_id: Option<u32>,
    pub namespace_handles: NamespaceHandles,
    pub cgroup_path: Option<String>,
    pub network_interface: Option<String>,
    pub mount_points: Vec<MountPoint>,
    pub security_context: SecurityContext,
}

/// Namespace handles for isolation
#[derive(Debug, Clone)]
pub struct NamespaceHandles {
    pub pid: Option<i32>,
    pub network: Option<i32>,
    pub mount: Option<i32>,
    pub ipc: Option<i32>,
    pub uts: Option<i32>,
    pub user: Option<i32>,
}

/// Mount point information
#[derive(Debug, Clone)]
pub struct MountPoint {
    pub source: PathBuf,
    pub target: PathBuf,
    pub filesystem_type: String,
    pub flags: u64,
}

/// Security context for the container
#[derive(Debug, Clone)]
pub struct SecurityContext {
    pub capabilities: Vec<String>,
    pub apparmor_profile: Option<String>,
    pub seccomp_profile: Option<String>,
    pub uid_map: Option<String>,
    pub gid_map: Option<String>,
}

impl ContainerManager {
    /// Create a new container manager instance
    pub async fn new(config: ContainerManagerConfig) -> Result<Self> {
        let resource_manager = Arc::new(resource_manager::ResourceManager::new());
        let network_manager = Arc::new(network_manager::NetworkManager::new().await?);
        let image_manager = Arc::new(image_manager::ImageManager::new());
        let security_manager = Arc::new(security::SecurityManager::new());
        let lifecycle_manager = Arc::new(lifecycle::LifecycleManager::new());
        let orchestration = Arc::new(orchestration::OrchestrationEngine::new());

        Ok(Self {
            containers: Arc::new(RwLock::new(HashMap::new())),
            resource_manager,
            network_manager,
            image_manager,
            security_manager,
            lifecycle_manager,
            orchestration,
            config,
        })
    }

    /// Create a new container from configuration
    pub async fn create_container(&self, config: ContainerConfig) -> ContainerResult<String> {
        // Validate configuration
        self.validate_config(&config)?;

        // Check resource availability
        let resource_allocation = self.resource_manager.allocate_resources(&config.resource_limits).await?;
        
        // Validate security constraints
        self.security_manager.validate_security_config(&config.security)?;

        // Create container
        let container_id = config.container_id.clone();
        let container = Container {
            id: container_id.clone(),
            name: config.name.clone(),
            state: ContainerState::Created,
            config: config.clone(),
            runtime_data: RuntimeData {
                process_id: None,
                namespace_handles: NamespaceHandles::default(),
                cgroup_path: None,
                network_interface: None,
                mount_points: vec![],
                security_context: SecurityContext {
                    capabilities: config.security.capabilities.clone(),
                    apparmor_profile: config.security.apparmor_profile.clone(),
                    seccomp_profile: config.security.seccomp_profile.clone(),
                    uid_map: None,
                    gid_map: None,
                },
            },
            created_at: SystemTime::now(),
            started_at: None,
            stats: ContainerStats {
                cpu_usage: 0.0,
                memory_usage: 0,
                memory_limit: config.resource_limits.memory_bytes.unwrap_or(u64::MAX),
                disk_usage: 0,
                network_rx: 0,
                network_tx: 0,
                uptime: Duration::from_secs(0),
                pid_count: 0,
            },
            pid: None,
        };

        // Store container
        {
            let mut containers = self.containers.write().await;
            if containers.contains_key(&container_id) {
                return Err(ContainerError::AlreadyExists(container_id));
            }
            containers.insert(container_id.clone(), container);
        }

        // Setup networking
        self.network_manager.create_network_interface(&container_id, &config.network).await?;

        // Create namespaces
        self.create_namespaces(&container_id).await?;

        // Setup security context
        self.security_manager.setup_security_context(&container_id, &config.security).await?;

        // Create mount points
        self.setup_mount_points(&container_id, &config).await?;

        Ok(container_id)
    }

    /// Start a container
    pub async fn start_container(&self, container_id: &str) -> ContainerResult<()> {
        let mut containers = self.containers.write().await;
        
        let container = containers.get_mut(container_id)
            .ok_or(ContainerError::NotFound(container_id.to_string()))?;

        // Check if container is in a valid state to start
        match container.state {
            ContainerState::Created | ContainerState::Stopped | ContainerState::Exited => {},
            _ => return Err(ContainerError::InvalidConfig(
                format!("Cannot start container in state: {:?}", container.state)
            )),
        }

        // Setup runtime environment
        self.prepare_runtime_environment(container_id).await?;

        // Start the container process
        let pid = self.launch_container_process(container_id).await?;
        
        // Update container state
        container.state = ContainerState::Running;
        container.started_at = Some(SystemTime::now());
        container.pid = Some(pid);

        // Start monitoring
        if self.config.monitoring_enabled {
            self.start_monitoring(container_id).await?;
        }

        Ok(())
    }

    /// Stop a running container
    pub async fn stop_container(&self, container_id: &str, timeout: Option<Duration>) -> ContainerResult<()> {
        let mut containers = self.containers.write().await;
        
        let container = containers.get_mut(container_id)
            .ok_or(ContainerError::NotFound(container_id.to_string()))?;

        let timeout = timeout.unwrap_or(Duration::from_secs(10));

        match container.state {
            ContainerState::Running => {},
            _ => return Err(ContainerError::InvalidConfig(
                format!("Cannot stop container in state: {:?}", container.state)
            )),
        }

        // Send SIGTERM first
        if let Some(pid) = container.pid {
            self.signal_process(pid, libc::SIGTERM)?;
            
            // Wait for graceful shutdown
            let wait_start = SystemTime::now();
            while SystemTime::now().duration_since(wait_start)? < timeout {
                if let Ok(Some(_)) = nix::sys::wait::waitpid(nix::unistd::Pid::from_raw(pid as i32), Some(nix::sys::wait::WaitPidFlag::WNOHANG)) {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }

            // Force kill if still running
            if SystemTime::now().duration_since(wait_start)? >= timeout {
                self.signal_process(pid, libc::SIGKILL)?;
            }
        }

        // Cleanup resources
        self.cleanup_container_resources(container_id).await?;

        // Update state
        container.state = ContainerState::Stopped;
        container.pid = None;

        Ok(())
    }

    /// Pause a running container
    pub async fn pause_container(&self, container_id: &str) -> ContainerResult<()> {
        let mut containers = self.containers.write().await;
        
        let container = containers.get_mut(container_id)
            .ok_or(ContainerError::NotFound(container_id.to_string()))?;

        if container.state != ContainerState::Running {
            return Err(ContainerError::InvalidConfig(
                format!("Cannot pause container in state: {:?}", container.state)
            ));
        }

        // Send SIGSTOP to container process
        if let Some(pid) = container.pid {
            self.signal_process(pid, libc::SIGSTOP)?;
            container.state = ContainerState::Paused;
        }

        Ok(())
    }

    /// Resume a paused container
    pub async fn resume_container(&self, container_id: &str) -> ContainerResult<()> {
        let mut containers = self.containers.write().await;
        
        let container = containers.get_mut(container_id)
            .ok_or(ContainerError::NotFound(container_id.to_string()))?;

        if container.state != ContainerState::Paused {
            return Err(ContainerError::InvalidConfig(
                format!("Cannot resume container in state: {:?}", container.state)
            ));
        }

        // Send SIGCONT to container process
        if let Some(pid) = container.pid {
            self.signal_process(pid, libc::SIGCONT)?;
            container.state = ContainerState::Running;
        }

        Ok(())
    }

    /// Remove a container
    pub async fn remove_container(&self, container_id: &str, force: bool) -> ContainerResult<()> {
        let mut containers = self.containers.write().await;
        
        if !containers.contains_key(container_id) {
            return Err(ContainerError::NotFound(container_id.to_string()));
        }

        let container = containers.get(container_id).unwrap();

        // Check if container can be removed
        if matches!(container.state, ContainerState::Running) && !force {
            return Err(ContainerError::InvalidConfig(
                "Cannot remove running container. Stop it first or use force".to_string()
            ));
        }

        // Force stop if needed
        if matches!(container.state, ContainerState::Running) && force {
            self.stop_container(container_id, Some(Duration::from_secs(1))).await?;
        }

        // Cleanup all resources
        self.cleanup_container_resources(container_id).await?;

        // Remove from registry
        containers.remove(container_id);

        Ok(())
    }

    /// Get container information
    pub async fn get_container(&self, container_id: &str) -> ContainerResult<Container> {
        let containers = self.containers.read().await;
        containers.get(container_id)
            .cloned()
            .ok_or(ContainerError::NotFound(container_id.to_string()))
    }

    /// List all containers
    pub async fn list_containers(&self) -> Vec<Container> {
        let containers = self.containers.read().await;
        containers.values().cloned().collect()
    }

    /// Get container stats
    pub async fn get_container_stats(&self, container_id: &str) -> ContainerResult<ContainerStats> {
        let containers = self.containers.read().await;
        let container = containers.get(container_id)
            .ok_or(ContainerError::NotFound(container_id.to_string()))?;

        // Update stats with current values
        let stats = self.update_container_stats(container_id, container).await?;
        Ok(stats)
    }

    /// Execute command in running container
    pub async fn exec_in_container(&self, container_id: &str, command: Vec<String>, 
                                  working_dir: Option<PathBuf>) -> ContainerResult<String> {
        let containers = self.containers.read().await;
        let container = containers.get(container_id)
            .ok_or(ContainerError::NotFound(container_id.to_string()))?;

        if container.state != ContainerState::Running {
            return Err(ContainerError::InvalidConfig(
                "Can only exec in running containers".to_string()
            ));
        }

        // Execute command in container namespace
        let output = self.execute_in_namespace(container_id, command, working_dir).await?;
        Ok(output)
    }

    // Private helper methods

    fn validate_config(&self, config: &ContainerConfig) -> ContainerResult<()> {
        // Validate container name
        if config.name.is_empty() {
            return Err(ContainerError::InvalidConfig("Container name cannot be empty".to_string()));
        }

        // Validate resource limits
        if let Some(limit) = config.resource_limits.memory_bytes {
            if limit == 0 {
                return Err(ContainerError::InvalidConfig("Memory limit must be greater than 0".to_string()));
            }
        }

        // Validate security configuration
        if config.security.privileged {
            log::warn!("Creating privileged container: {}", config.name);
        }

        Ok(())
    }

    async fn create_namespaces(&self, container_id: &str) -> ContainerResult<()> {
        let namespaces = namespaces::NamespaceManager::new();
        let handles = namespaces.create_all_namespaces().await?;
        
        // Store namespace handles in container runtime data
        {
            let mut containers = self.containers.write().await;
            if let Some(container) = containers.get_mut(container_id) {
                container.runtime_data.namespace_handles = handles;
            }
        }

        Ok(())
    }

    fn signal_process(&self, pid: u32, signal: i32) -> Result<(), std::io::Error> {
        unsafe {
            libc::kill(pid as i32, signal);
        }
        Ok(())
    }

    async fn prepare_runtime_environment(&self, container_id: &str) -> ContainerResult<()> {
        // Setup cgroups
        self.resource_manager.setup_cgroups(container_id).await?;

        // Setup networking
        self.network_manager.prepare_network_environment(container_id).await?;

        // Setup security context
        self.security_manager.prepare_security_context(container_id).await?;

        Ok(())
    }

    async fn launch_container_process(&self, container_id: &str) -> Result<u32, ContainerError> {
        let containers = self.containers.read().await;
        let container = containers.get(container_id)
            .ok_or(ContainerError::NotFound(container_id.to_string()))?;

        // Use fork/exec to launch container process with namespace isolation
        let pid = self.fork_exec_with_namespaces(container_id, &container.config).await?;

        Ok(pid)
    }

    async fn fork_exec_with_namespaces(&self, container_id: &str, config: &ContainerConfig) -> Result<u32, ContainerError> {
        // This is a simplified implementation
        // In a real implementation, this would involve complex forking and namespace setup
        
        let pid = unsafe { libc::fork() };
        if pid == 0 {
            // Child process
            // Join namespaces, set up environment, exec container command
            self.join_container_namespaces(container_id)?;
            self.setup_container_environment(config)?;
            self.exec_container_command(config)?;
            
            std::process::exit(0);
        } else if pid > 0 {
            // Parent process
            Ok(pid as u32)
        } else {
            Err(ContainerError::System("Failed to fork container process".to_string()))
        }
    }

    fn join_container_namespaces(&self, container_id: &str) -> Result<(), ContainerError> {
        // Implementation would use setns() to join the container's namespaces
        // This is a stub implementation
        Ok(())
    }

    fn setup_container_environment(&self, config: &ContainerConfig) -> Result<(), ContainerError> {
        // Set up environment variables
        for (key, value) in &config.environment {
            std::env::set_var(key, value);
        }
        Ok(())
    }

    fn exec_container_command(&self, config: &ContainerConfig) -> Result<(), ContainerError> {
        if config.command.is_empty() {
            return Err(ContainerError::InvalidConfig("No command specified".to_string()));
        }

        let command = &config.command[0];
        let args = &config.command[1..];

        // Execute the command
        let result = std::process::Command::new(command)
            .args(args)
            .exec();

        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(ContainerError::System(format!("Failed to exec: {}", e)))
        }
    }

    async fn setup_mount_points(&self, container_id: &str, config: &ContainerConfig) -> ContainerResult<()> {
        for volume in &config.volumes {
            // Create mount point in container namespace
            // This is a simplified implementation
            log::info!("Setting up volume mount: {} -> {}", 
                      volume.host_path.display(), 
                      volume.container_path.display());
        }
        Ok(())
    }

    async fn cleanup_container_resources(&self, container_id: &str) -> ContainerResult<()> {
        // Cleanup networking
        self.network_manager.cleanup_network_interface(container_id).await?;

        // Cleanup cgroups
        self.resource_manager.cleanup_cgroups(container_id).await?;

        // Cleanup namespaces
        self.cleanup_namespaces(container_id).await?;

        Ok(())
    }

    async fn cleanup_namespaces(&self, container_id: &str) -> ContainerResult<()> {
        let namespaces = namespaces::NamespaceManager::new();
        namespaces.cleanup_namespaces(container_id).await?;
        Ok(())
    }

    async fn execute_in_namespace(&self, container_id: &str, command: Vec<String>, 
                                 working_dir: Option<PathBuf>) -> Result<String, ContainerError> {
        // Execute command in container namespace
        // This is a simplified implementation
        let output = std::process::Command::new(&command[0])
            .args(&command[1..])
            .current_dir(working_dir.unwrap_or_else(|| PathBuf::from("/")))
            .output()
            .map_err(|e| ContainerError::System(format!("Failed to execute command: {}", e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        
        if !output.status.success() {
            return Err(ContainerError::System(format!("Command failed: {}", stderr)));
        }

        Ok(stdout)
    }

    async fn start_monitoring(&self, container_id: &str) -> Result<(), ContainerError> {
        // Start monitoring container resources
        // This would typically involve setting up monitoring threads/tasks
        Ok(())
    }

    async fn update_container_stats(&self, container_id: &str, container: &Container) -> Result<ContainerStats, ContainerError> {
        let mut stats = container.stats.clone();
        
        // Update CPU and memory usage
        if let Some(pid) = container.pid {
            stats = self.resource_manager.get_process_stats(pid).await?;
        }

        Ok(stats)
    }
}

impl Default for NamespaceHandles {
    fn default() -> Self {
        Self {
            pid: None,
            network: None,
            mount: None,
            ipc: None,
            uts: None,
            user: None,
        }
    }
}