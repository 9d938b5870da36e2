//! Namespace Management for Container Isolation
//! 
//! This module provides comprehensive Linux namespace management including
//! process, network, mount, IPC, UTS, user, and cgroup namespaces.

use super::*;
use nix::errno::Errno;
use nix::sys::stat::Mode;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::PathBuf;

/// Namespace Manager - Handles all Linux namespace operations
pub struct NamespaceManager {
    proc_path: PathBuf,
    namespace_path: PathBuf,
}

impl NamespaceManager {
    /// Create a new namespace manager
    pub fn new() -> Self {
        Self {
            proc_path: PathBuf::from("/proc"),
            namespace_path: PathBuf::from("/var/run/multios/namespaces"),
        }
    }

    /// Create all required namespaces for a container
    pub async fn create_all_namespaces(&self) -> Result<NamespaceHandles, ContainerError> {
        let mut handles = NamespaceHandles::default();

        // Create PID namespace
        handles.pid = Some(self.create_namespace(NamespaceType::Pid).await?);

        // Create network namespace
        handles.network = Some(self.create_namespace(NamespaceType::Network).await?);

        // Create mount namespace
        handles.mount = Some(self.create_namespace(NamespaceType::Mount).await?);

        // Create IPC namespace
        handles.ipc = Some(self.create_namespace(NamespaceType::Ipc).await?);

        // Create UTS namespace
        handles.uts = Some(self.create_namespace(NamespaceType::Uts).await?);

        // Create user namespace
        handles.user = Some(self.create_namespace(NamespaceType::User).await?);

        Ok(handles)
    }

    /// Create a specific namespace type
    pub async fn create_namespace(&self, ns_type: NamespaceType) -> Result<i32, ContainerError> {
        match ns_type {
            NamespaceType::Pid => self.create_pid_namespace().await,
            NamespaceType::Network => self.create_network_namespace().await,
            NamespaceType::Mount => self.create_mount_namespace().await,
            NamespaceType::Ipc => self.create_ipc_namespace().await,
            NamespaceType::Uts => self.create_uts_namespace().await,
            NamespaceType::User => self.create_user_namespace().await,
            NamespaceType::Cgroup => self.create_cgroup_namespace().await,
        }
    }

    /// Create PID namespace for process isolation
    async fn create_pid_namespace(&self) -> Result<i32, ContainerError> {
        // Use unshare() to create a new PID namespace
        unsafe {
            let result = libc::unshare(libc::CLONE_NEWPID);
            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to create PID namespace: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        // Get the current process's PID namespace fd
        let fd = self.get_namespace_fd("/proc/self/ns/pid")?;
        Ok(fd)
    }

    /// Create network namespace for network isolation
    async fn create_network_namespace(&self) -> Result<i32, ContainerError> {
        // Create network namespace
        unsafe {
            let result = libc::unshare(libc::CLONE_NEWNET);
            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to create network namespace: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        let fd = self.get_namespace_fd("/proc/self/ns/net")?;
        Ok(fd)
    }

    /// Create mount namespace for filesystem isolation
    async fn create_mount_namespace(&self) -> Result<i32, ContainerError> {
        unsafe {
            let result = libc::unshare(libc::CLONE_NEWNS);
            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to create mount namespace: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        let fd = self.get_namespace_fd("/proc/self/ns/mnt")?;
        Ok(fd)
    }

    /// Create IPC namespace for inter-process communication isolation
    async fn create_ipc_namespace(&self) -> Result<i32, ContainerError> {
        unsafe {
            let result = libc::unshare(libc::CLONE_NEWIPC);
            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to create IPC namespace: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        let fd = self.get_namespace_fd("/proc/self/ns/ipc")?;
        Ok(fd)
    }

    /// Create UTS namespace for hostname isolation
    async fn create_uts_namespace(&self) -> Result<i32, ContainerError> {
        unsafe {
            let result = libc::unshare(libc::CLONE_NEWUTS);
            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to create UTS namespace: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        let fd = self.get_namespace_fd("/proc/self/ns/uts")?;
        Ok(fd)
    }

    /// Create user namespace for user isolation
    async fn create_user_namespace(&self) -> Result<i32, ContainerError> {
        unsafe {
            let result = libc::unshare(libc::CLONE_NEWUSER);
            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to create user namespace: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        let fd = self.get_namespace_fd("/proc/self/ns/user")?;
        Ok(fd)
    }

    /// Create cgroup namespace for cgroup isolation
    async fn create_cgroup_namespace(&self) -> Result<i32, ContainerError> {
        unsafe {
            let result = libc::unshare(libc::CLONE_NEWCGROUP);
            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to create cgroup namespace: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        let fd = self.get_namespace_fd("/proc/self/ns/cgroup")?;
        Ok(fd)
    }

    /// Join an existing namespace
    pub async fn join_namespace(&self, ns_path: &str, ns_type: NamespaceType) -> Result<i32, ContainerError> {
        // Open the namespace file
        let file = std::fs::File::open(ns_path)
            .map_err(|e| ContainerError::System(format!("Failed to open namespace file: {}", e)))?;
        
        let fd = file.as_raw_fd();

        // Use setns() to join the namespace
        unsafe {
            let result = libc::setns(fd, ns_type.to_clo_flags());
            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to join namespace: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        Ok(fd)
    }

    /// Setup PID namespace for container
    pub async fn setup_pid_namespace(&self, container_id: &str, hostname: Option<String>) -> Result<(), ContainerError> {
        // Set up /proc filesystem in the new namespace
        self.mount_proc_filesystem().await?;

        // Set hostname if provided
        if let Some(hostname) = hostname {
            unsafe {
                libc::sethostname(hostname.as_ptr(), hostname.len());
            }
        }

        // Write PID mapping for user namespace
        self.write_pid_mapping(container_id).await?;

        Ok(())
    }

    /// Setup network namespace for container
    pub async fn setup_network_namespace(&self, container_id: &str, network_config: &NetworkConfig) -> Result<(), ContainerError> {
        // Create loopback interface
        self.create_loopback_interface().await?;

        // Set up networking based on mode
        match network_config.network_mode {
            NetworkMode::Bridge => {
                self.setup_bridge_network(container_id, network_config).await?;
            },
            NetworkMode::Host => {
                self.setup_host_network().await?;
            },
            NetworkMode::None => {
                self.setup_isolated_network().await?;
            },
            NetworkMode::Custom(_) => {
                self.setup_custom_network(container_id, network_config).await?;
            }
        }

        // Configure DNS if needed
        if !network_config.dns_servers.is_empty() {
            self.configure_dns(&network_config.dns_servers).await?;
        }

        Ok(())
    }

    /// Setup mount namespace for container
    pub async fn setup_mount_namespace(&self, container_id: &str, rootfs_path: &PathBuf, 
                                     read_only: bool) -> Result<(), ContainerError> {
        // Pivot root to new rootfs
        self.pivot_root(rootfs_path, container_id).await?;

        // Remount root as read-only if needed
        if read_only {
            self.remount_root_readonly().await?;
        }

        // Create tmpfs mounts for volatile directories
        self.setup_tmpfs_mounts().await?;

        // Bind mount required system files
        self.bind_mount_system_files().await?;

        Ok(())
    }

    /// Setup user namespace for container
    pub async fn setup_user_namespace(&self, container_id: &str, uid_map: Option<String>, 
                                    gid_map: Option<String>) -> Result<(), ContainerError> {
        // Write UID mapping
        if let Some(uid_map) = uid_map {
            self.write_id_mapping("uid_map", &uid_map).await?;
        }

        // Write GID mapping
        if let Some(gid_map) = gid_map {
            self.write_id_mapping("gid_map", &gid_map).await?;
        }

        // Set capabilities
        self.set_user_capabilities(container_id).await?;

        Ok(())
    }

    /// Cleanup namespaces
    pub async fn cleanup_namespaces(&self, container_id: &str) -> Result<(), ContainerError> {
        // Remove namespace files
        let ns_dir = self.namespace_path.join(container_id);
        if ns_dir.exists() {
            std::fs::remove_dir_all(&ns_dir)
                .map_err(|e| ContainerError::System(format!("Failed to remove namespace dir: {}", e)))?;
        }

        Ok(())
    }

    // Private helper methods

    fn get_namespace_fd(&self, ns_path: &str) -> Result<i32, ContainerError> {
        let file = std::fs::File::open(ns_path)
            .map_err(|e| ContainerError::System(format!("Failed to open namespace file: {}", e)))?;
        Ok(file.as_raw_fd())
    }

    async fn mount_proc_filesystem(&self) -> Result<(), ContainerError> {
        unsafe {
            let result = libc::mount(
                "proc".as_ptr() as *const libc::c_char,
                "/proc".as_ptr() as *const libc::c_char,
                "proc\0".as_ptr() as *const libc::c_char,
                0,
                std::ptr::null(),
            );

            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to mount proc filesystem: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }
        Ok(())
    }

    async fn write_pid_mapping(&self, container_id: &str) -> Result<(), ContainerError> {
        let mapping_path = format!("/proc/{}/setgroups", unsafe { libc::getpid() });
        
        // Write "deny" to setgroups to allow uid/gid mappings
        std::fs::write(&mapping_path, "deny")
            .map_err(|e| ContainerError::System(format!("Failed to write setgroups: {}", e)))?;

        // Write UID mapping (0 -> 0, mapping to host UID)
        let uid_map = format!("0 {} 1\n", unsafe { libc::getuid() });
        let uid_path = format!("/proc/{}/uid_map", unsafe { libc::getpid() });
        std::fs::write(&uid_path, uid_map)
            .map_err(|e| ContainerError::System(format!("Failed to write uid_map: {}", e)))?;

        // Write GID mapping (0 -> 0, mapping to host GID)
        let gid_map = format!("0 {} 1\n", unsafe { libc::getgid() });
        let gid_path = format!("/proc/{}/gid_map", unsafe { libc::getpid() });
        std::fs::write(&gid_path, gid_map)
            .map_err(|e| ContainerError::System(format!("Failed to write gid_map: {}", e)))?;

        Ok(())
    }

    async fn create_loopback_interface(&self) -> Result<(), ContainerError> {
        // This would use netlink or similar to create loopback interface
        // Simplified implementation
        unsafe {
            let result = libc::system("ip link set lo up\0".as_ptr() as *const libc::c_char);
            if result != 0 {
                return Err(ContainerError::NetworkError("Failed to bring up loopback interface".to_string()));
            }
        }
        Ok(())
    }

    async fn setup_bridge_network(&self, container_id: &str, config: &NetworkConfig) -> Result<(), ContainerError> {
        // Create virtual ethernet pair
        let veth_name = format!("veth_{}", container_id);
        
        unsafe {
            let cmd = format!("ip link add {} type veth peer name {}\0", veth_name, veth_name);
            let result = libc::system(cmd.as_ptr() as *const libc::c_char);
            if result != 0 {
                return Err(ContainerError::NetworkError("Failed to create veth pair".to_string()));
            }
        }

        Ok(())
    }

    async fn setup_host_network(&self) -> Result<(), ContainerError> {
        // Host network mode means sharing the host's network namespace
        // This is handled by not creating a new network namespace
        Ok(())
    }

    async fn setup_isolated_network(&self) -> Result<(), ContainerError> {
        // Isolated network means only loopback is available
        // This is handled by only bringing up lo interface
        Ok(())
    }

    async fn setup_custom_network(&self, container_id: &str, config: &NetworkConfig) -> Result<(), ContainerError> {
        // Custom network configuration
        // This would parse the custom network mode and configure accordingly
        Ok(())
    }

    async fn configure_dns(&self, dns_servers: &[String]) -> Result<(), ContainerError> {
        // Write DNS configuration to /etc/resolv.conf
        let mut resolv_content = String::new();
        for dns in dns_servers {
            resolv_content.push_str(&format!("nameserver {}\n", dns));
        }

        std::fs::write("/etc/resolv.conf", resolv_content)
            .map_err(|e| ContainerError::NetworkError(format!("Failed to write resolv.conf: {}", e)))?;

        Ok(())
    }

    async fn pivot_root(&self, rootfs_path: &PathBuf, container_id: &str) -> Result<(), ContainerError> {
        // Simplified pivot root implementation
        // In production, this would be much more complex

        // Change to new root
        std::env::set_current_dir(rootfs_path)
            .map_err(|e| ContainerError::System(format!("Failed to change directory: {}", e)))?;

        // Create new root mount point
        let old_root = rootfs_path.join("old_root");
        std::fs::create_dir_all(&old_root)
            .map_err(|e| ContainerError::System(format!("Failed to create old_root: {}", e)))?;

        unsafe {
            let result = libc::syscall(
                libc::SYS_pivot_root,
                rootfs_path.as_ptr() as *const libc::c_char,
                old_root.as_ptr() as *const libc::c_char,
            );

            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to pivot root: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }

        Ok(())
    }

    async fn remount_root_readonly(&self) -> Result<(), ContainerError> {
        unsafe {
            let result = libc::mount(
                std::ptr::null(),
                "/\0".as_ptr() as *const libc::c_char,
                std::ptr::null(),
                libc::MS_REMOUNT | libc::MS_RDONLY,
                std::ptr::null(),
            );

            if result == -1 {
                return Err(ContainerError::System(format!(
                    "Failed to remount root readonly: {}",
                    std::io::Error::last_os_error()
                )));
            }
        }
        Ok(())
    }

    async fn setup_tmpfs_mounts(&self) -> Result<(), ContainerError> {
        let tmpfs_mounts = vec!["/tmp", "/run", "/var/tmp"];
        
        for mount_point in tmpfs_mounts {
            unsafe {
                let result = libc::mount(
                    "tmpfs\0".as_ptr() as *const libc::c_char,
                    mount_point.as_ptr() as *const libc::c_char,
                    "tmpfs\0".as_ptr() as *const libc::c_char,
                    0,
                    "size=64M\0".as_ptr() as *const libc::c_char,
                );

                if result == -1 {
                    log::warn!("Failed to mount tmpfs at {}: {}", mount_point, 
                              std::io::Error::last_os_error());
                }
            }
        }

        Ok(())
    }

    async fn bind_mount_system_files(&self) -> Result<(), ContainerError> {
        // Bind mount /sys, /dev, /proc if needed
        // This is simplified - real implementation would be more sophisticated
        Ok(())
    }

    async fn write_id_mapping(&self, map_type: &str, mapping: &str) -> Result<(), ContainerError> {
        let path = format!("/proc/{}/{}", unsafe { libc::getpid() }, map_type);
        std::fs::write(&path, mapping)
            .map_err(|e| ContainerError::System(format!("Failed to write {}: {}", map_type, e)))?;
        Ok(())
    }

    async fn set_user_capabilities(&self, container_id: &str) -> Result<(), ContainerError> {
        // Set appropriate user capabilities
        // This would involve using libcap or similar
        Ok(())
    }
}

/// Namespace types supported by the system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NamespaceType {
    Pid,
    Network,
    Mount,
    Ipc,
    Uts,
    User,
    Cgroup,
}

impl NamespaceType {
    /// Convert to CLONE_* flags
    pub fn to_clo_flags(&self) -> i32 {
        match self {
            NamespaceType::Pid => libc::CLONE_NEWPID,
            NamespaceType::Network => libc::CLONE_NEWNET,
            NamespaceType::Mount => libc::CLONE_NEWNS,
            NamespaceType::Ipc => libc::CLONE_NEWIPC,
            NamespaceType::Uts => libc::CLONE_NEWUTS,
            NamespaceType::User => libc::CLONE_NEWUSER,
            NamespaceType::Cgroup => libc::CLONE_NEWCGROUP,
        }
    }
}

/// Namespace handles for managing container namespaces
#[derive(Debug, Clone, Default)]
pub struct NamespaceHandles {
    pub pid: Option<i32>,
    pub network: Option<i32>,
    pub mount: Option<i32>,
    pub ipc: Option<i32>,
    pub uts: Option<i32>,
    pub user: Option<i32>,
}

impl NamespaceHandles {
    /// Check if all required namespaces are available
    pub fn is_complete(&self) -> bool {
        self.pid.is_some() && self.network.is_some() && self.mount.is_some() &&
        self.ipc.is_some() && self.uts.is_some() && self.user.is_some()
    }

    /// Close all namespace file descriptors
    pub fn close_all(&self) -> Result<(), ContainerError> {
        let fds = [
            self.pid, self.network, self.mount, 
            self.ipc, self.uts, self.user
        ];

        for fd in fds {
            if let Some(fd) = fd {
                unsafe {
                    libc::close(fd);
                }
            }
        }

        Ok(())
    }
}

/// Namespace snapshot for saving/restoring state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceSnapshot {
    pub container_id: String,
    pub handles: NamespaceHandles,
    pub creation_time: SystemTime,
    pub config: NamespaceConfig,
}

/// Configuration for namespace setup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceConfig {
    pub enable_user_ns: bool,
    pub enable_network_ns: bool,
    pub hostname: Option<String>,
    pub domainname: Option<String>,
    pub uid_map: Option<String>,
    pub gid_map: Option<String>,
    pub mount_propagation: HashMap<String, String>,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            enable_user_ns: true,
            enable_network_ns: true,
            hostname: None,
            domainname: None,
            uid_map: Some("0 0 1".to_string()),
            gid_map: Some("0 0 1".to_string()),
            mount_propagation: HashMap::new(),
        }
    }
}