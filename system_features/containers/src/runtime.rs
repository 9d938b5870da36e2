//! Container Runtime Interface and Execution Engine
//! 
//! This module provides the container runtime interface and handles the actual
//! execution of containers with proper isolation and resource management.

use super::*;
use std::process::{Command, Stdio};
use std::os::unix::io::AsRawFd;
use nix::unistd::{fork, Fork, setsid, chroot};
use nix::errno::Errno;

/// Container Runtime - Core container execution engine
pub struct ContainerRuntime {
    container_manager: Arc<ContainerManager>,
    image_manager: Arc<image_manager::ImageManager>,
    network_manager: Arc<network_manager::NetworkManager>,
    security_manager: Arc<security::SecurityManager>,
    resource_manager: Arc<resource_manager::ResourceManager>,
    event_sender: mpsc::UnboundedSender<RuntimeEvent>,
}

/// Runtime event types
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    ContainerStarted { container_id: String },
    ContainerStopped { container_id: String },
    ContainerFailed { container_id: String, error: String },
    ContainerOomKilled { container_id: String },
    ContainerHealthCheck { container_id: String, status: HealthCheckStatus },
}

/// Health check status
#[derive(Debug, Clone)]
pub enum HealthCheckStatus {
    Healthy,
    Unhealthy,
    Unknown,
}

impl ContainerRuntime {
    /// Create a new container runtime
    pub fn new() -> Self {
        let (event_sender, _) = mpsc::unbounded_channel();
        
        // Create managers (these would be passed from the container manager)
        let container_manager = Arc::new(ContainerManager::new(ContainerManagerConfig::default()).await);
        let image_manager = Arc::new(image_manager::ImageManager::new());
        let network_manager = Arc::new(network_manager::NetworkManager::new().await);
        let security_manager = Arc::new(security::SecurityManager::new());
        let resource_manager = Arc::new(resource_manager::ResourceManager::new());

        Self {
            container_manager,
            image_manager,
            network_manager,
            security_manager,
            resource_manager,
            event_sender,
        }
    }

    /// Start the container runtime
    pub async fn start(&self) -> ContainerResult<()> {
        log::info!("Starting MultiOS Container Runtime");
        
        // Initialize runtime infrastructure
        self.initialize_runtime().await?;

        // Start event processing loop
        self.start_event_loop().await?;

        log::info!("MultiOS Container Runtime started successfully");
        Ok(())
    }

    /// Create and start a container
    pub async fn create_and_start_container(&self, config: ContainerConfig) -> ContainerResult<String> {
        log::info!("Creating and starting container {}", config.container_id);

        // Create container
        let container_id = self.container_manager.create_container(config.clone()).await?;

        // Extract image
        let extracted_image = self.prepare_container_image(&container_id, &config.image).await?;

        // Apply security context
        self.security_manager.setup_security_context(&container_id, &config.security).await?;

        // Setup namespaces
        self.setup_container_namespaces(&container_id, &config).await?;

        // Start container
        self.start_container_process(&container_id, &extracted_image).await?;

        // Register container in runtime
        self.register_container(&container_id, config).await?;

        // Send start event
        let event = RuntimeEvent::ContainerStarted {
            container_id: container_id.clone(),
        };
        let _ = self.event_sender.send(event);

        log::info!("Container {} created and started successfully", container_id);
        Ok(container_id)
    }

    /// Execute a command in a running container
    pub async fn exec_in_container(&self, container_id: &str, command: Vec<String>, 
                                  working_dir: Option<PathBuf>) -> ContainerResult<String> {
        log::info!("Executing command in container {}: {:?}", container_id, command);

        // Get container information
        let container = self.container_manager.get_container(container_id).await?;

        // Check if container is running
        if container.state != ContainerState::Running {
            return Err(ContainerError::InvalidConfig(
                "Can only exec in running containers".to_string()
            ));
        }

        // Join container's namespaces for execution
        let output = self.execute_in_container_namespaces(container_id, &container, command, working_dir).await?;

        log::info!("Command executed successfully in container {}", container_id);
        Ok(output)
    }

    /// Get container logs
    pub async fn get_container_logs(&self, container_id: &str, tail: Option<u32>, 
                                   since: Option<SystemTime>) -> ContainerResult<String> {
        // Get container information
        let container = self.container_manager.get_container(container_id).await?;

        // Read logs from container process stdout/stderr
        // This would typically involve reading from a log file or pipe
        let logs = self.read_container_logs(container_id, &container, tail, since).await?;

        Ok(logs)
    }

    /// Wait for container to exit
    pub async fn wait_for_container(&self, container_id: &str, timeout: Option<Duration>) -> ContainerResult<ContainerExitInfo> {
        log::info!("Waiting for container {} to exit", container_id);

        let timeout = timeout.unwrap_or(Duration::from_secs(300));
        
        // Wait for container process to exit
        let exit_info = self.wait_container_process(container_id, timeout).await?;

        // Update container state
        self.update_container_state(container_id, ContainerState::Exited).await?;

        // Send stop event
        let event = RuntimeEvent::ContainerStopped {
            container_id: container_id.to_string(),
        };
        let _ = self.event_sender.send(event);

        log::info!("Container {} exited with code {}", container_id, exit_info.exit_code);
        Ok(exit_info)
    }

    /// Attach to a container
    pub async fn attach_to_container(&self, container_id: &str, stream_type: StreamType) -> ContainerResult<ContainerStream> {
        // Get container information
        let container = self.container_manager.get_container(container_id).await?;

        if !matches!(container.state, ContainerState::Running) {
            return Err(ContainerError::InvalidConfig(
                "Can only attach to running containers".to_string()
            ));
        }

        // Create container stream
        let stream = self.create_container_stream(container_id, stream_type).await?;

        Ok(stream)
    }

    /// Get container statistics
    pub async fn get_container_stats(&self, container_id: &str) -> ContainerResult<ContainerRuntimeStats> {
        let container = self.container_manager.get_container(container_id).await?;

        // Get resource usage
        let usage = self.resource_manager.get_usage(container_id).await?;

        // Get additional runtime statistics
        let runtime_stats = self.gather_runtime_stats(container_id, &container).await?;

        Ok(ContainerRuntimeStats {
            container_id: container_id.to_string(),
            cpu_usage: runtime_stats.cpu_usage,
            memory_usage: usage.memory_usage,
            memory_limit: runtime_stats.memory_limit,
            disk_usage: usage.disk_usage,
            network_rx: usage.network_usage,
            network_tx: usage.network_usage,
            processes: runtime_stats.processes,
            file_descriptors: runtime_stats.file_descriptors,
            uptime: SystemTime::now().duration_since(container.started_at.unwrap_or_else(|| SystemTime::now())).unwrap_or_default(),
            state: container.state,
        })
    }

    // Private helper methods

    async fn initialize_runtime(&self) -> ContainerResult<()> {
        // Initialize cgroups
        self.setup_cgroups().await?;

        // Initialize namespace management
        self.setup_namespace_support().await?;

        // Initialize networking
        self.network_manager.initialize_networking().await?;

        // Initialize security subsystems
        self.security_manager.initialize_security().await?;

        Ok(())
    }

    async fn start_event_loop(&self) {
        // Start background event processing
        let event_sender = self.event_sender.clone();
        tokio::spawn(async move {
            loop {
                // Process events
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        });
    }

    async fn prepare_container_image(&self, container_id: &str, image_name: &str) -> ContainerResult<ExtractedImage> {
        // Extract image to container-specific directory
        let container_root = format!("/var/lib/multios/containers/{}", container_id);
        let target_path = PathBuf::from(&container_root);

        // Extract image
        let extracted = self.image_manager.extract_image(image_name, &target_path).await?;

        Ok(extracted)
    }

    async fn setup_container_namespaces(&self, container_id: &str, config: &ContainerConfig) -> ContainerResult<()> {
        if config.namespace_mode.pid {
            // Setup PID namespace
            let namespace_manager = namespaces::NamespaceManager::new();
            namespace_manager.setup_pid_namespace(container_id, config.name.clone().into()).await?;
        }

        if config.namespace_mode.network {
            // Setup network namespace
            let namespace_manager = namespaces::NamespaceManager::new();
            namespace_manager.setup_network_namespace(container_id, &config.network).await?;
        }

        if config.namespace_mode.mount {
            // Setup mount namespace
            let namespace_manager = namespaces::NamespaceManager::new();
            let rootfs_path = PathBuf::from(format!("/var/lib/multios/containers/{}/rootfs", container_id));
            namespace_manager.setup_mount_namespace(container_id, &rootfs_path, config.security.read_only_root).await?;
        }

        if config.namespace_mode.user {
            // Setup user namespace
            let namespace_manager = namespaces::NamespaceManager::new();
            namespace_manager.setup_user_namespace(container_id, 
                Some("0 100000 65536".to_string()), 
                Some("0 100000 65536".to_string())).await?;
        }

        Ok(())
    }

    async fn start_container_process(&self, container_id: &str, extracted_image: &ExtractedImage) -> ContainerResult<()> {
        // Use fork/exec to create container process
        unsafe {
            match fork() {
                Ok(Fork::Child) => {
                    // Child process - this will become the container process
                    self.child_process_setup(container_id, extracted_image).await?;
                    std::process::exit(0); // Should not reach here
                },
                Ok(Fork::Parent(child_pid)) => {
                    // Parent process
                    let child_pid = child_pid.as_raw() as u32;
                    
                    // Update container with PID
                    self.update_container_pid(container_id, child_pid).await?;
                    
                    Ok(())
                },
                Err(errno) => {
                    Err(ContainerError::System(format!("Fork failed: {}", errno)))
                }
            }
        }
    }

    async fn child_process_setup(&self, container_id: &str, extracted_image: &ExtractedImage) -> ContainerResult<()> {
        // Close parent file descriptors
        // This would close unnecessary file descriptors from the parent

        // Set up session
        if let Err(errno) = setsid() {
            return Err(ContainerError::System(format!("setsid failed: {}", errno)));
        }

        // Change root if specified
        let rootfs_path = format!("/var/lib/multios/containers/{}/rootfs", container_id);
        if let Err(errno) = chroot(rootfs_path.as_str()) {
            return Err(ContainerError::System(format!("chroot failed: {}", errno)));
        }

        // Change to root directory
        if let Err(errno) = std::env::set_current_dir("/") {
            return Err(ContainerError::System(format!("chdir failed: {}", errno)));
        }

        // Set up environment
        for (key, value) in &extracted_image.config.environment {
            std::env::set_var(key, value);
        }

        // Set up signal handling
        self.setup_signal_handlers().await?;

        // Execute container command
        let command = &extracted_image.config.command;
        if !command.is_empty() {
            let program = &command[0];
            let args = &command[1..];
            
            let result = Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .exec();
            
            match result {
                Ok(_) => {},
                Err(e) => {
                    log::error!("Failed to exec container command: {}", e);
                }
            }
        }

        Ok(())
    }

    async fn execute_in_container_namespaces(&self, container_id: &str, container: &Container,
                                           command: Vec<String>, working_dir: Option<PathBuf>) -> ContainerResult<String> {
        // This would fork and execute in the container's namespace
        // Simplified implementation

        let output = Command::new(&command[0])
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

    async fn read_container_logs(&self, container_id: &str, container: &Container,
                                tail: Option<u32>, since: Option<SystemTime>) -> ContainerResult<String> {
        // This would read from container log files or pipes
        // Simplified implementation - return logs from container process

        let log_file = format!("/var/lib/multios/containers/{}/logs/stdout.log", container_id);
        
        if PathBuf::from(&log_file).exists() {
            let mut content = std::fs::read_to_string(&log_file)
                .map_err(|e| ContainerError::System(format!("Failed to read log file: {}", e)))?;

            // Apply tail limit
            if let Some(limit) = tail {
                let lines: Vec<&str> = content.lines().collect();
                if lines.len() > limit as usize {
                    content = lines[lines.len() - limit as usize..].join("\n");
                }
            }

            // Apply since filter
            if let Some(since_time) = since {
                let lines: Vec<&str> = content.lines().collect();
                let filtered_lines: Vec<&str> = lines.into_iter()
                    .filter(|line| {
                        // Parse timestamp from log line and compare
                        // Simplified - would parse actual log timestamps
                        true
                    })
                    .collect();
                content = filtered_lines.join("\n");
            }

            Ok(content)
        } else {
            Ok("No logs available".to_string())
        }
    }

    async fn wait_container_process(&self, container_id: &str, timeout: Duration) -> ContainerResult<ContainerExitInfo> {
        let container = self.container_manager.get_container(container_id).await?;
        let pid = container.pid.ok_or(ContainerError::InvalidConfig(
            "Container process PID not found".to_string()
        ))?;

        // Wait for process to exit with timeout
        let wait_result = timeout(Duration::from_secs(300), self.wait_for_pid_exit(pid)).await;

        let exit_code = match wait_result {
            Ok(Ok(exit_code)) => exit_code,
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                // Timeout - kill the process
                unsafe {
                    libc::kill(pid as i32, libc::SIGKILL);
                }
                137 // SIGKILL exit code
            }
        };

        Ok(ContainerExitInfo {
            container_id: container_id.to_string(),
            exit_code,
            started_at: container.started_at.unwrap_or_else(|| SystemTime::now()),
            finished_at: SystemTime::now(),
        })
    }

    async fn wait_for_pid_exit(&self, pid: u32) -> ContainerResult<i32> {
        // Wait for the specified PID to exit
        // This would use waitpid or similar
        Ok(0) // Simplified
    }

    async fn create_container_stream(&self, container_id: &str, stream_type: StreamType) -> ContainerResult<ContainerStream> {
        // This would create a stream for attaching to container I/O
        // Simplified implementation
        Ok(ContainerStream {
            container_id: container_id.to_string(),
            stream_type,
            file_descriptors: (0, 0, 0), // stdin, stdout, stderr FDs
        })
    }

    async fn update_container_state(&self, container_id: &str, new_state: ContainerState) -> ContainerResult<()> {
        // Update container state in the manager
        // This would call the container manager to update state
        Ok(())
    }

    async fn update_container_pid(&self, container_id: &str, pid: u32) -> ContainerResult<()> {
        // Update container with its process ID
        // This would update the container manager
        Ok(())
    }

    async fn register_container(&self, container_id: &str, config: ContainerConfig) -> ContainerResult<()> {
        // Register container in runtime tracking
        log::info!("Registered container {} in runtime", container_id);
        Ok(())
    }

    async fn gather_runtime_stats(&self, container_id: &str, container: &Container) -> ContainerResult<RuntimeStats> {
        let mut stats = RuntimeStats {
            cpu_usage: 0.0,
            memory_limit: container.stats.memory_limit,
            processes: vec![],
            file_descriptors: 0,
        };

        if let Some(pid) = container.pid {
            // Gather additional runtime-specific statistics
            // This would read from /proc/[pid]/stat, status, fd/, etc.
            stats.processes = vec![pid];
        }

        Ok(stats)
    }

    async fn setup_cgroups(&self) -> ContainerResult<()> {
        // Create cgroup root
        let cgroup_root = "/sys/fs/cgroup/multios";
        std::fs::create_dir_all(cgroup_root)
            .map_err(|e| ContainerError::System(format!("Failed to create cgroup root: {}", e)))?;

        Ok(())
    }

    async fn setup_namespace_support(&self) -> ContainerResult<()> {
        // This would set up namespace management infrastructure
        Ok(())
    }

    async fn setup_signal_handlers(&self) -> ContainerResult<()> {
        // Set up signal handlers for graceful shutdown
        // This would handle SIGTERM, SIGINT, etc.
        Ok(())
    }
}

/// Container stream for I/O attachment
#[derive(Debug, Clone)]
pub struct ContainerStream {
    pub container_id: String,
    pub stream_type: StreamType,
    pub file_descriptors: (RawFd, RawFd, RawFd), // stdin, stdout, stderr
}

/// Stream types for container attachment
#[derive(Debug, Clone)]
pub enum StreamType {
    All,
    Stdout,
    Stderr,
    Stdin,
}

/// Container exit information
#[derive(Debug, Clone)]
pub struct ContainerExitInfo {
    pub container_id: String,
    pub exit_code: i32,
    pub started_at: SystemTime,
    pub finished_at: SystemTime,
}

/// Runtime-specific container statistics
#[derive(Debug, Clone)]
pub struct ContainerRuntimeStats {
    pub container_id: String,
    pub cpu_usage: f64,
    pub memory_usage: u64,
    pub memory_limit: u64,
    pub disk_usage: u64,
    pub network_rx: u64,
    pub network_tx: u64,
    pub processes: Vec<u32>,
    pub file_descriptors: u64,
    pub uptime: Duration,
    pub state: ContainerState,
}

/// Additional runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub cpu_usage: f64,
    pub memory_limit: u64,
    pub processes: Vec<u32>,
    pub file_descriptors: u64,
}

/// Container attach configuration
#[derive(Debug, Clone)]
pub struct AttachConfig {
    pub container_id: String,
    pub detach_keys: Option<String>,
    pub tty: bool,
    pub stdin: bool,
    pub stdout: bool,
    pub stderr: bool,
}

/// Container exec configuration
#[derive(Debug, Clone)]
pub struct ExecConfig {
    pub container_id: String,
    pub command: Vec<String>,
    pub working_dir: Option<String>,
    pub env: Vec<(String, String)>,
    pub user: Option<String>,
    pub tty: bool,
    pub attach_stdin: bool,
    pub attach_stdout: bool,
    pub attach_stderr: bool,
}

/// Container port mapping
#[derive(Debug, Clone)]
pub struct PortMapping {
    pub container_port: u16,
    pub host_port: u16,
    pub protocol: String,
}

/// Container mount point
#[derive(Debug, Clone)]
pub struct Mount {
    pub source: PathBuf,
    pub target: PathBuf,
    pub filesystem_type: String,
    pub options: Vec<String>,
}