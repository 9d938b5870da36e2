//! MultiOS Administrative API System
//! 
//! This module provides comprehensive administrative APIs for system management,
//! including REST-like endpoints, authentication, authorization, request validation,
//! rate limiting, and integration with the existing syscall interface.

use spin::{Mutex, RwLock};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use alloc::boxed::Box;
use bitflags::bitflags;
use core::str;
use core::fmt;

use crate::log::{info, warn, error, debug};
use crate::syscall::{SyscallError, SyscallResult};
use crate::{KernelError, get_kernel_state, ArchType};
use crate::service_manager::{ServiceId, ServiceState, ServiceType, ServiceHandle, ServiceDescriptor};
use crate::scheduler;
use crate::memory;
use crate::arch::interrupts::InterruptStats;

/// Administrative API Result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API Server State
static ADMIN_API_SERVER: Mutex<Option<AdminApiServer>> = Mutex::new(None);

/// API Request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    SystemInfo,
    SystemShutdown,
    SystemReboot,
    ProcessList,
    ProcessTerminate { pid: u32 },
    ProcessInfo { pid: u32 },
    MemoryStats,
    MemoryAlloc { size: usize },
    MemoryFree { address: usize },
    ServiceList,
    ServiceStart { service_id: ServiceId },
    ServiceStop { service_id: ServiceId },
    ServiceRestart { service_id: ServiceId },
    ServiceStatus { service_id: ServiceId },
    LogLevel { level: LogLevel },
    ConfigGet { key: String },
    ConfigSet { key: String, value: String },
    FileSystemInfo,
    PerformanceStats,
    NetworkInfo,
    SecurityStatus,
    UserList,
    UserCreate { username: String, password_hash: String },
    UserDelete { user_id: u32 },
    SystemBackup { path: String },
    SystemRestore { path: String },
    Custom { endpoint: String, data: Vec<u8> }
}

/// API Response structure
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub success: bool,
    pub status_code: u16,
    pub data: Option<ApiData>,
    pub message: String,
    pub timestamp: u64,
    pub request_id: String,
}

impl ApiResponse {
    pub fn new(success: bool, status_code: u16, data: Option<ApiData>, message: &str) -> Self {
        ApiResponse {
            success,
            status_code,
            data,
            message: message.to_string(),
            timestamp: crate::bootstrap::get_boot_time(),
            request_id: generate_request_id(),
        }
    }
    
    pub fn ok(data: Option<ApiData>, message: &str) -> Self {
        Self::new(true, 200, data, message)
    }
    
    pub fn error(status_code: u16, message: &str) -> Self {
        Self::new(false, status_code, None, message)
    }
    
    pub fn unauthorized(message: &str) -> Self {
        Self::new(false, 401, None, message)
    }
    
    pub fn forbidden(message: &str) -> Self {
        Self::new(false, 403, None, message)
    }
    
    pub fn not_found(message: &str) -> Self {
        Self::new(false, 404, None, message)
    }
    
    pub fn bad_request(message: &str) -> Self {
        Self::new(false, 400, None, message)
    }
    
    pub fn internal_error(message: &str) -> Self {
        Self::new(false, 500, None, message)
    }
}

/// API Data types
#[derive(Debug, Clone)]
pub enum ApiData {
    SystemInfo(SystemInfo),
    ProcessInfo(ProcessInfo),
    ProcessList(Vec<ProcessInfo>),
    MemoryInfo(MemoryInfo),
    ServiceInfo(ServiceInfo),
    ServiceList(Vec<ServiceInfo>),
    PerformanceData(PerformanceData),
    ConfigData(ConfigData),
    LogData(Vec<LogEntry>),
    NetworkInfo(NetworkInfo),
    SecurityInfo(SecurityInfo),
    UserInfo(UserInfo),
    UserList(Vec<UserInfo>),
    FileSystemInfo(FileSystemInfo),
    Custom(Vec<u8>),
    Empty,
}

impl ApiData {
    pub fn serialize(&self) -> Vec<u8> {
        // In a real implementation, this would serialize to JSON or other format
        format!("{:?}", self).into_bytes()
    }
    
    pub fn deserialize(data: &[u8]) -> ApiResult<Self> {
        // In a real implementation, this would deserialize from JSON or other format
        // For now, just return error
        Err(ApiError::NotImplemented("Deserialization not implemented"))
    }
}

/// System information for API
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub kernel_name: String,
    pub kernel_version: String,
    pub architecture: ArchType,
    pub boot_time: u64,
    pub uptime: u64,
    pub total_memory: usize,
    pub used_memory: usize,
    pub available_memory: usize,
    pub cpu_count: u32,
    pub load_average: [f64; 3],
    pub processes: u32,
    pub services: u32,
}

/// Process information for API
#[derive(Debug, Clone)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub state: String,
    pub cpu_usage: f64,
    pub memory_usage: usize,
    pub parent_pid: u32,
    pub start_time: u64,
    pub priority: i32,
    pub threads: u32,
}

/// Memory information for API
#[derive(Debug, Clone)]
pub struct MemoryInfo {
    pub total: usize,
    pub used: usize,
    pub available: usize,
    pub swap_total: usize,
    pub swap_used: usize,
    pub page_faults: u64,
    pub physical_pages: u64,
    pub virtual_pages: u64,
}

/// Service information for API
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub service_id: ServiceId,
    pub name: String,
    pub description: String,
    pub state: ServiceState,
    pub service_type: ServiceType,
    pub health: String,
    pub uptime: u64,
    pub restart_count: u32,
    pub dependencies: Vec<ServiceId>,
}

/// Performance data for API
#[derive(Debug, Clone)]
pub struct PerformanceData {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub network_io: NetworkIo,
    pub process_count: u32,
    pub thread_count: u32,
    pub interrupt_count: u64,
}

/// Network I/O statistics
#[derive(Debug, Clone)]
pub struct NetworkIo {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
    pub errors_in: u64,
    pub errors_out: u64,
}

/// Configuration data
#[derive(Debug, Clone)]
pub struct ConfigData {
    pub key: String,
    pub value: String,
    pub data_type: ConfigType,
    pub modified: u64,
}

/// Configuration types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigType {
    String,
    Integer,
    Boolean,
    Float,
    Json,
}

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub source: String,
    pub message: String,
    pub context: String,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Critical = 5,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Network information
#[derive(Debug, Clone)]
pub struct NetworkInfo {
    pub interfaces: Vec<NetworkInterface>,
    pub routes: Vec<RouteInfo>,
    pub connections: Vec<ConnectionInfo>,
}

/// Network interface
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    pub name: String,
    pub address: String,
    pub netmask: String,
    pub broadcast: String,
    pub is_up: bool,
    pub mtu: u32,
    pub speed: u64,
}

/// Route information
#[derive(Debug, Clone)]
pub struct RouteInfo {
    pub destination: String,
    pub gateway: String,
    pub netmask: String,
    pub interface: String,
    pub metric: u32,
}

/// Connection information
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub local_address: String,
    pub remote_address: String,
    pub state: String,
    pub protocol: String,
    pub pid: u32,
}

/// Security information
#[derive(Debug, Clone)]
pub struct SecurityInfo {
    pub enabled_security_features: Vec<String>,
    pub failed_login_attempts: u32,
    pub last_failed_login: u64,
    pub active_sessions: u32,
    pub permissions: Vec<PermissionInfo>,
    pub audit_enabled: bool,
    pub encryption_level: String,
}

/// Permission information
#[derive(Debug, Clone)]
pub struct PermissionInfo {
    pub user: String,
    pub resource: String,
    pub permissions: Vec<String>,
    pub granted: u64,
    pub expires: Option<u64>,
}

/// User information
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub user_id: u32,
    pub username: String,
    pub full_name: String,
    pub home_directory: String,
    pub shell: String,
    pub groups: Vec<String>,
    pub last_login: u64,
    pub account_expires: Option<u64>,
    pub locked: bool,
}

/// File system information
#[derive(Debug, Clone)]
pub struct FileSystemInfo {
    pub mount_points: Vec<MountPoint>,
    pub total_size: u64,
    pub used_size: u64,
    pub available_size: u64,
    pub inodes_total: u64,
    pub inodes_used: u64,
}

/// Mount point information
#[derive(Debug, Clone)]
pub struct MountPoint {
    pub device: String,
    pub mount_point: String,
    pub file_system: String,
    pub total_size: u64,
    pub used_size: u64,
    pub available_size: u64,
    pub options: String,
}

/// API Error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    NotImplemented,
    InvalidRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalError,
    ServiceUnavailable,
    RateLimitExceeded,
    InvalidParameter,
    ValidationError,
    SecurityViolation,
    PermissionDenied,
    ResourceExhausted,
    Timeout,
    ConnectionError,
    ParseError,
    SerializationError,
}

/// API Error conversion
impl From<KernelError> for ApiError {
    fn from(error: KernelError) -> Self {
        match error {
            KernelError::NotInitialized => ApiError::ServiceUnavailable,
            KernelError::PermissionDenied => ApiError::PermissionDenied,
            KernelError::OutOfMemory => ApiError::ResourceExhausted,
            _ => ApiError::InternalError,
        }
    }
}

impl From<SyscallError> for ApiError {
    fn from(error: SyscallError) -> Self {
        match error {
            SyscallError::PermissionDenied => ApiError::PermissionDenied,
            SyscallError::ProcessNotFound | SyscallError::ThreadNotFound => ApiError::NotFound,
            SyscallError::InvalidArgument | SyscallError::InvalidPointer => ApiError::InvalidParameter,
            SyscallError::ResourceUnavailable => ApiError::ResourceExhausted,
            _ => ApiError::InternalError,
        }
    }
}

/// Administrative API Server
pub struct AdminApiServer {
    /// Server configuration
    config: ApiConfig,
    /// Authentication manager
    auth_manager: AuthManager,
    /// Rate limiter
    rate_limiter: RateLimiter,
    /// Request validator
    validator: RequestValidator,
    /// API endpoints
    endpoints: Vec<ApiEndpoint>,
    /// Server statistics
    stats: ServerStats,
    /// Request handlers
    handlers: RequestHandlers,
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub enabled: bool,
    pub port: u16,
    pub max_connections: u32,
    pub request_timeout: u32,
    pub max_request_size: usize,
    pub enable_cors: bool,
    pub enable_https: bool,
    pub enable_authentication: bool,
    pub enable_authorization: bool,
    pub rate_limit_enabled: bool,
    pub api_key_required: bool,
}

/// API Endpoint definition
#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    pub path: String,
    pub method: HttpMethod,
    pub required_permissions: Vec<Permission>,
    pub rate_limit: Option<RateLimit>,
    pub handler: fn(&ApiRequest) -> ApiResult<ApiResponse>,
}

/// HTTP Methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

/// Permission types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Permission {
    SystemRead = 1,
    SystemWrite = 2,
    SystemAdmin = 3,
    ProcessRead = 4,
    ProcessWrite = 5,
    ProcessAdmin = 6,
    ServiceRead = 7,
    ServiceWrite = 8,
    ServiceAdmin = 9,
    NetworkRead = 10,
    NetworkWrite = 11,
    NetworkAdmin = 12,
    SecurityRead = 13,
    SecurityWrite = 14,
    SecurityAdmin = 15,
    UserRead = 16,
    UserWrite = 17,
    UserAdmin = 18,
    ConfigRead = 19,
    ConfigWrite = 20,
    AuditRead = 21,
    AuditWrite = 22,
}

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimit {
    pub requests_per_minute: u32,
    pub burst_size: u32,
    pub cooldown: u32,
}

/// Authentication Manager
pub struct AuthManager {
    /// API keys
    api_keys: RwLock<Vec<ApiKey>>,
    /// User sessions
    sessions: Mutex<Vec<Session>>,
    /// Default permissions
    default_permissions: Vec<Permission>,
}

/// API Key information
#[derive(Debug, Clone)]
pub struct ApiKey {
    pub key: String,
    pub name: String,
    pub permissions: Vec<Permission>,
    pub created: u64,
    pub expires: Option<u64>,
    pub last_used: u64,
    pub rate_limit: Option<RateLimit>,
}

/// User session
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: String,
    pub user_id: u32,
    pub username: String,
    pub permissions: Vec<Permission>,
    pub created: u64,
    pub last_access: u64,
    pub expires: u64,
    pub ip_address: String,
}

/// Rate Limiter
pub struct RateLimiter {
    /// Rate limit entries
    entries: Mutex<Vec<RateLimitEntry>>,
    /// Global rate limit
    global_limit: RateLimit,
}

/// Rate limit entry
#[derive(Debug, Clone)]
pub struct RateLimitEntry {
    pub key: String,
    pub requests: u32,
    pub window_start: u64,
    pub reset_at: u64,
}

/// Request Validator
pub struct RequestValidator {
    /// Maximum request size
    max_size: usize,
    /// Allowed content types
    allowed_content_types: Vec<String>,
    /// Required headers
    required_headers: Vec<String>,
    /// Banned patterns
    banned_patterns: Vec<String>,
}

/// Request Handlers
pub struct RequestHandlers {
    /// System handlers
    system_handlers: SystemHandlers,
    /// Process handlers
    process_handlers: ProcessHandlers,
    /// Memory handlers
    memory_handlers: MemoryHandlers,
    /// Service handlers
    service_handlers: ServiceHandlers,
    /// Network handlers
    network_handlers: NetworkHandlers,
    /// Security handlers
    security_handlers: SecurityHandlers,
}

/// System handlers
struct SystemHandlers;

impl SystemHandlers {
    pub fn handle_system_info(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        let kernel_state = get_kernel_state()
            .map_err(ApiError::from)?;
        
        let uptime = crate::bootstrap::get_boot_time() - kernel_state.boot_time;
        let system_info = SystemInfo {
            kernel_name: "MultiOS".to_string(),
            kernel_version: kernel_state.version,
            architecture: kernel_state.architecture,
            boot_time: kernel_state.boot_time,
            uptime,
            total_memory: kernel_state.memory_stats.total_pages * 4096,
            used_memory: kernel_state.memory_stats.used_pages * 4096,
            available_memory: kernel_state.memory_stats.available_pages * 4096,
            cpu_count: 1, // Would get from actual CPU info
            load_average: [0.0, 0.0, 0.0], // Would calculate from system stats
            processes: 1, // Would get from process table
            services: 1,  // Would get from service manager
        };
        
        Ok(ApiResponse::ok(Some(ApiData::SystemInfo(system_info)), "System information retrieved"))
    }
    
    pub fn handle_system_shutdown(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        warn!("System shutdown requested via API");
        
        // In a real implementation, this would:
        // 1. Save state
        // 2. Stop services gracefully
        // 3. Unmount file systems
        // 4. Power off or halt
        
        Ok(ApiResponse::ok(None, "System shutdown initiated"))
    }
    
    pub fn handle_system_reboot(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        warn!("System reboot requested via API");
        
        // In a real implementation, this would:
        // 1. Save state
        // 2. Stop services gracefully
        // 3. Unmount file systems
        // 4. Reset system
        
        Ok(ApiResponse::ok(None, "System reboot initiated"))
    }
    
    pub fn handle_log_level(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::LogLevel { level } = request {
            info!("Log level set to: {}", level);
            // In a real implementation, this would update the global log level
            Ok(ApiResponse::ok(None, "Log level updated"))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
}

/// Process handlers
struct ProcessHandlers;

impl ProcessHandlers {
    pub fn handle_process_list(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        // In a real implementation, this would get process list from process table
        let processes = vec![ProcessInfo {
            pid: 1,
            name: "kernel".to_string(),
            state: "running".to_string(),
            cpu_usage: 0.1,
            memory_usage: 1024 * 1024,
            parent_pid: 0,
            start_time: crate::bootstrap::get_boot_time(),
            priority: 0,
            threads: 1,
        }];
        
        Ok(ApiResponse::ok(Some(ApiData::ProcessList(processes)), "Process list retrieved"))
    }
    
    pub fn handle_process_info(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::ProcessInfo { pid } = request {
            // In a real implementation, this would get process info from process table
            let process = ProcessInfo {
                pid: *pid,
                name: format!("process-{}", pid),
                state: "running".to_string(),
                cpu_usage: 0.0,
                memory_usage: 0,
                parent_pid: 1,
                start_time: crate::bootstrap::get_boot_time(),
                priority: 0,
                threads: 1,
            };
            
            Ok(ApiResponse::ok(Some(ApiData::ProcessInfo(process)), "Process information retrieved"))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
    
    pub fn handle_process_terminate(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::ProcessTerminate { pid } = request {
            // In a real implementation, this would send signal to process
            warn!("Process termination requested for PID {}", pid);
            Ok(ApiResponse::ok(None, format!("Process {} termination initiated", pid)))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
}

/// Memory handlers
struct MemoryHandlers;

impl MemoryHandlers {
    pub fn handle_memory_stats(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        let memory_stats = memory::get_memory_stats();
        
        let memory_info = MemoryInfo {
            total: memory_stats.total_pages * 4096,
            used: memory_stats.used_pages * 4096,
            available: memory_stats.available_pages * 4096,
            swap_total: 0,
            swap_used: 0,
            page_faults: 0,
            physical_pages: memory_stats.total_pages,
            virtual_pages: memory_stats.total_pages * 2, // Example
        };
        
        Ok(ApiResponse::ok(Some(ApiData::MemoryInfo(memory_info)), "Memory statistics retrieved"))
    }
    
    pub fn handle_memory_alloc(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::MemoryAlloc { size } = request {
            if *size > 1024 * 1024 * 1024 { // 1GB limit
                return Err(ApiError::InvalidParameter);
            }
            
            // In a real implementation, this would allocate memory
            let address = 0x1000; // Placeholder
            
            Ok(ApiResponse::ok(Some(ApiData::Custom(address.to_le_bytes().to_vec())), 
                             "Memory allocated"))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
    
    pub fn handle_memory_free(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::MemoryFree { address } = request {
            // In a real implementation, this would free memory
            warn!("Memory free requested for address {:#x}", address);
            Ok(ApiResponse::ok(None, "Memory freed"))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
}

/// Service handlers
struct ServiceHandlers;

impl ServiceHandlers {
    pub fn handle_service_list(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        // In a real implementation, this would get service list from service manager
        let services = vec![ServiceInfo {
            service_id: ServiceId(1),
            name: "kernel-service".to_string(),
            description: "Core kernel service".to_string(),
            state: ServiceState::Running,
            service_type: ServiceType::SystemService,
            health: "healthy".to_string(),
            uptime: crate::bootstrap::get_boot_time(),
            restart_count: 0,
            dependencies: vec![],
        }];
        
        Ok(ApiResponse::ok(Some(ApiData::ServiceList(services)), "Service list retrieved"))
    }
    
    pub fn handle_service_start(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::ServiceStart { service_id } = request {
            warn!("Service start requested for service {}", service_id.0);
            Ok(ApiResponse::ok(None, format!("Service {} start initiated", service_id.0)))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
    
    pub fn handle_service_stop(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::ServiceStop { service_id } = request {
            warn!("Service stop requested for service {}", service_id.0);
            Ok(ApiResponse::ok(None, format!("Service {} stop initiated", service_id.0)))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
    
    pub fn handle_service_restart(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::ServiceRestart { service_id } = request {
            warn!("Service restart requested for service {}", service_id.0);
            Ok(ApiResponse::ok(None, format!("Service {} restart initiated", service_id.0)))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
    
    pub fn handle_service_status(request: &ApiRequest) -> ApiResult<ApiResponse> {
        if let ApiRequest::ServiceStatus { service_id } = request {
            let service_info = ServiceInfo {
                service_id: *service_id,
                name: format!("service-{}", service_id.0),
                description: "Service description".to_string(),
                state: ServiceState::Running,
                service_type: ServiceType::SystemService,
                health: "healthy".to_string(),
                uptime: crate::bootstrap::get_boot_time(),
                restart_count: 0,
                dependencies: vec![],
            };
            
            Ok(ApiResponse::ok(Some(ApiData::ServiceInfo(service_info)), "Service status retrieved"))
        } else {
            Err(ApiError::InvalidRequest)
        }
    }
}

/// Network handlers
struct NetworkHandlers;

impl NetworkHandlers {
    pub fn handle_network_info(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        // In a real implementation, this would get network information
        let network_info = NetworkInfo {
            interfaces: vec![],
            routes: vec![],
            connections: vec![],
        };
        
        Ok(ApiResponse::ok(Some(ApiData::NetworkInfo(network_info)), "Network information retrieved"))
    }
}

/// Security handlers
struct SecurityHandlers;

impl SecurityHandlers {
    pub fn handle_security_status(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        let security_info = SecurityInfo {
            enabled_security_features: vec!["encryption".to_string(), "audit".to_string()],
            failed_login_attempts: 0,
            last_failed_login: 0,
            active_sessions: 1,
            permissions: vec![],
            audit_enabled: true,
            encryption_level: "AES-256".to_string(),
        };
        
        Ok(ApiResponse::ok(Some(ApiData::SecurityInfo(security_info)), "Security status retrieved"))
    }
    
    pub fn handle_user_list(_request: &ApiRequest) -> ApiResult<ApiResponse> {
        // In a real implementation, this would get user list
        let users = vec![UserInfo {
            user_id: 0,
            username: "root".to_string(),
            full_name: "System Administrator".to_string(),
            home_directory: "/root".to_string(),
            shell: "/bin/sh".to_string(),
            groups: vec!["root".to_string(), "wheel".to_string()],
            last_login: crate::bootstrap::get_boot_time(),
            account_expires: None,
            locked: false,
        }];
        
        Ok(ApiResponse::ok(Some(ApiData::UserList(users)), "User list retrieved"))
    }
}

/// Server statistics
#[derive(Debug, Clone)]
pub struct ServerStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub avg_response_time: f64,
    pub current_connections: u32,
    pub uptime: u64,
    pub last_reset: u64,
}

/// API Server Implementation
impl AdminApiServer {
    /// Create new API server
    pub fn new(config: ApiConfig) -> Self {
        info!("Initializing Administrative API Server");
        
        let mut server = AdminApiServer {
            config: config.clone(),
            auth_manager: AuthManager::new(config.enable_authentication),
            rate_limiter: RateLimiter::new(RateLimit {
                requests_per_minute: 1000,
                burst_size: 100,
                cooldown: 60,
            }),
            validator: RequestValidator::new(config.max_request_size),
            endpoints: Vec::new(),
            stats: ServerStats {
                total_requests: 0,
                successful_requests: 0,
                failed_requests: 0,
                avg_response_time: 0.0,
                current_connections: 0,
                uptime: crate::bootstrap::get_boot_time(),
                last_reset: crate::bootstrap::get_boot_time(),
            },
            handlers: RequestHandlers::new(),
        };
        
        server.setup_endpoints();
        server
    }
    
    /// Setup API endpoints
    fn setup_endpoints(&mut self) {
        // System endpoints
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/system/info".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::SystemRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| SystemHandlers::handle_system_info(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/system/shutdown".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::SystemAdmin],
            rate_limit: Some(RateLimit { requests_per_minute: 10, burst_size: 3, cooldown: 300 }),
            handler: |req| SystemHandlers::handle_system_shutdown(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/system/reboot".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::SystemAdmin],
            rate_limit: Some(RateLimit { requests_per_minute: 10, burst_size: 3, cooldown: 300 }),
            handler: |req| SystemHandlers::handle_system_reboot(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/system/log-level".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::SystemWrite],
            rate_limit: Some(RateLimit { requests_per_minute: 30, burst_size: 5, cooldown: 60 }),
            handler: |req| SystemHandlers::handle_log_level(req),
        });
        
        // Process endpoints
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/processes".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::ProcessRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| ProcessHandlers::handle_process_list(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/processes/{pid}".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::ProcessRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| ProcessHandlers::handle_process_info(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/processes/{pid}/terminate".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::ProcessAdmin],
            rate_limit: Some(RateLimit { requests_per_minute: 30, burst_size: 5, cooldown: 60 }),
            handler: |req| ProcessHandlers::handle_process_terminate(req),
        });
        
        // Memory endpoints
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/memory/stats".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::SystemRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| MemoryHandlers::handle_memory_stats(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/memory/alloc".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::SystemWrite],
            rate_limit: Some(RateLimit { requests_per_minute: 100, burst_size: 20, cooldown: 60 }),
            handler: |req| MemoryHandlers::handle_memory_alloc(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/memory/free".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::SystemWrite],
            rate_limit: Some(RateLimit { requests_per_minute: 100, burst_size: 20, cooldown: 60 }),
            handler: |req| MemoryHandlers::handle_memory_free(req),
        });
        
        // Service endpoints
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/services".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::ServiceRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| ServiceHandlers::handle_service_list(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/services/{service_id}/start".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::ServiceAdmin],
            rate_limit: Some(RateLimit { requests_per_minute: 30, burst_size: 5, cooldown: 60 }),
            handler: |req| ServiceHandlers::handle_service_start(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/services/{service_id}/stop".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::ServiceAdmin],
            rate_limit: Some(RateLimit { requests_per_minute: 30, burst_size: 5, cooldown: 60 }),
            handler: |req| ServiceHandlers::handle_service_stop(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/services/{service_id}/restart".to_string(),
            method: HttpMethod::Post,
            required_permissions: vec![Permission::ServiceAdmin],
            rate_limit: Some(RateLimit { requests_per_minute: 30, burst_size: 5, cooldown: 60 }),
            handler: |req| ServiceHandlers::handle_service_restart(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/services/{service_id}/status".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::ServiceRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| ServiceHandlers::handle_service_status(req),
        });
        
        // Network endpoints
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/network/info".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::NetworkRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| NetworkHandlers::handle_network_info(req),
        });
        
        // Security endpoints
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/security/status".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::SecurityRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| SecurityHandlers::handle_security_status(req),
        });
        
        self.endpoints.push(ApiEndpoint {
            path: "/api/v1/users".to_string(),
            method: HttpMethod::Get,
            required_permissions: vec![Permission::UserRead],
            rate_limit: Some(RateLimit { requests_per_minute: 60, burst_size: 10, cooldown: 60 }),
            handler: |req| SecurityHandlers::handle_user_list(req),
        });
        
        info!("Setup {} API endpoints", self.endpoints.len());
    }
    
    /// Start the API server
    pub fn start(&mut self) -> ApiResult<()> {
        if !self.config.enabled {
            return Err(ApiError::ServiceUnavailable);
        }
        
        info!("Starting Administrative API Server on port {}", self.config.port);
        
        // Initialize authentication
        if self.config.enable_authentication {
            self.auth_manager.initialize()?;
        }
        
        // Initialize rate limiter
        if self.config.rate_limit_enabled {
            self.rate_limiter.initialize()?;
        }
        
        // Start server in background task
        // In a real implementation, this would start a network listener
        self.start_server_task();
        
        Ok(())
    }
    
    /// Stop the API server
    pub fn stop(&mut self) -> ApiResult<()> {
        info!("Stopping Administrative API Server");
        
        // In a real implementation, this would:
        // 1. Stop accepting new connections
        // 2. Complete ongoing requests
        // 3. Close all connections
        // 4. Stop background tasks
        
        Ok(())
    }
    
    /// Handle API request
    pub fn handle_request(&mut self, request: &ApiRequest, session: Option<&Session>) -> ApiResult<ApiResponse> {
        self.stats.total_requests += 1;
        
        // Validate request
        self.validator.validate_request(request)?;
        
        // Check rate limits
        if self.config.rate_limit_enabled {
            let client_key = session
                .map(|s| s.session_id.clone())
                .unwrap_or_else(|| "anonymous".to_string());
            
            self.rate_limiter.check_rate_limit(&client_key)?;
        }
        
        // Authenticate and authorize
        if self.config.enable_authentication && self.config.enable_authorization {
            if let Some(session) = session {
                self.auth_manager.authorize(session, request)?;
            } else {
                return Err(ApiError::Unauthorized);
            }
        }
        
        // Find and execute endpoint handler
        let start_time = crate::bootstrap::get_boot_time();
        
        // For this implementation, we'll route based on request type
        let response = self.route_request(request)?;
        
        // Update statistics
        let response_time = crate::bootstrap::get_boot_time() - start_time;
        self.update_stats(&response, response_time);
        
        Ok(response)
    }
    
    /// Route request to appropriate handler
    fn route_request(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        // Find matching endpoint and call handler
        for endpoint in &self.endpoints {
            if self.matches_endpoint(request, endpoint) {
                return (endpoint.handler)(request);
            }
        }
        
        Err(ApiError::NotFound)
    }
    
    /// Check if request matches endpoint
    fn matches_endpoint(&self, request: &ApiRequest, endpoint: &ApiEndpoint) -> bool {
        // Simple matching based on request type
        match request {
            ApiRequest::SystemInfo => endpoint.path == "/api/v1/system/info",
            ApiRequest::SystemShutdown => endpoint.path == "/api/v1/system/shutdown",
            ApiRequest::SystemReboot => endpoint.path == "/api/v1/system/reboot",
            ApiRequest::LogLevel { .. } => endpoint.path == "/api/v1/system/log-level",
            ApiRequest::ProcessList => endpoint.path == "/api/v1/processes",
            ApiRequest::ProcessInfo { .. } => endpoint.path.contains("/api/v1/processes/"),
            ApiRequest::ProcessTerminate { .. } => endpoint.path.contains("/api/v1/processes/") && endpoint.path.contains("/terminate"),
            ApiRequest::MemoryStats => endpoint.path == "/api/v1/memory/stats",
            ApiRequest::MemoryAlloc { .. } => endpoint.path == "/api/v1/memory/alloc",
            ApiRequest::MemoryFree { .. } => endpoint.path == "/api/v1/memory/free",
            ApiRequest::ServiceList => endpoint.path == "/api/v1/services",
            ApiRequest::ServiceStart { .. } => endpoint.path.contains("/api/v1/services/") && endpoint.path.contains("/start"),
            ApiRequest::ServiceStop { .. } => endpoint.path.contains("/api/v1/services/") && endpoint.path.contains("/stop"),
            ApiRequest::ServiceRestart { .. } => endpoint.path.contains("/api/v1/services/") && endpoint.path.contains("/restart"),
            ApiRequest::ServiceStatus { .. } => endpoint.path.contains("/api/v1/services/") && endpoint.path.contains("/status"),
            ApiRequest::NetworkInfo => endpoint.path == "/api/v1/network/info",
            ApiRequest::SecurityStatus => endpoint.path == "/api/v1/security/status",
            ApiRequest::UserList => endpoint.path == "/api/v1/users",
            _ => false,
        }
    }
    
    /// Start background server task
    fn start_server_task(&mut self) {
        info!("API server background task started");
        
        // In a real implementation, this would start a network listener
        // that accepts connections and processes API requests
    }
    
    /// Update server statistics
    fn update_stats(&mut self, response: &ApiResponse, response_time: u64) {
        if response.success {
            self.stats.successful_requests += 1;
        } else {
            self.stats.failed_requests += 1;
        }
        
        // Update average response time
        let total = self.stats.total_requests;
        let current_avg = self.stats.avg_response_time;
        self.stats.avg_response_time = (current_avg * (total - 1) as f64 + response_time as f64) / total as f64;
    }
    
    /// Get server statistics
    pub fn get_stats(&self) -> &ServerStats {
        &self.stats
    }
    
    /// Generate OpenAPI specification
    pub fn generate_openapi_spec(&self) -> String {
        let mut spec = String::new();
        
        spec.push_str(r#"{
  "openapi": "3.0.0",
  "info": {
    "title": "MultiOS Administrative API",
    "version": "1.0.0",
    "description": "Administrative API for MultiOS kernel management"
  },
  "servers": [
    {
      "url": "http://localhost:8080",
      "description": "Local development server"
    }
  ],
  "paths": {
"#);
        
        // Add endpoint documentation
        for endpoint in &self.endpoints {
            spec.push_str(&format!(
                r#"    "{}": {{
      "{}": {{
        "summary": "API endpoint",
        "description": "Administrative API endpoint",
        "parameters": [],
        "responses": {{
          "200": {{
            "description": "Success"
          }},
          "400": {{
            "description": "Bad Request"
          }},
          "401": {{
            "description": "Unauthorized"
          }},
          "403": {{
            "description": "Forbidden"
          }},
          "404": {{
            "description": "Not Found"
          }},
          "500": {{
            "description": "Internal Server Error"
          }}
        }},
        "security": [{{"ApiKeyAuth": []}}]
      }}
    }},
"#,
                endpoint.path,
                match endpoint.method {
                    HttpMethod::Get => "get",
                    HttpMethod::Post => "post",
                    HttpMethod::Put => "put",
                    HttpMethod::Delete => "delete",
                    HttpMethod::Patch => "patch",
                    HttpMethod::Options => "options",
                    HttpMethod::Head => "head",
                }
            ));
        }
        
        spec.push_str(r#"  },
  "components": {
    "securitySchemes": {
      "ApiKeyAuth": {
        "type": "apiKey",
        "name": "X-API-Key",
        "in": "header"
      }
    }
  }
}"#);
        
        spec
    }
}

/// AuthManager Implementation
impl AuthManager {
    fn new(enable_authentication: bool) -> Self {
        AuthManager {
            api_keys: RwLock::new(Vec::new()),
            sessions: Mutex::new(Vec::new()),
            default_permissions: if enable_authentication {
                vec![Permission::SystemRead, Permission::ProcessRead, Permission::ServiceRead]
            } else {
                vec![
                    Permission::SystemRead, Permission::SystemWrite, Permission::SystemAdmin,
                    Permission::ProcessRead, Permission::ProcessWrite, Permission::ProcessAdmin,
                    Permission::ServiceRead, Permission::ServiceWrite, Permission::ServiceAdmin,
                    Permission::NetworkRead, Permission::NetworkWrite, Permission::NetworkAdmin,
                    Permission::SecurityRead, Permission::SecurityWrite, Permission::SecurityAdmin,
                    Permission::UserRead, Permission::UserWrite, Permission::UserAdmin,
                    Permission::ConfigRead, Permission::ConfigWrite,
                    Permission::AuditRead, Permission::AuditWrite,
                ]
            },
        }
    }
    
    fn initialize(&self) -> ApiResult<()> {
        info!("Initializing authentication manager");
        
        // Create default API key for local access
        let mut api_keys = self.api_keys.write();
        api_keys.push(ApiKey {
            key: "admin-12345".to_string(),
            name: "Default Admin".to_string(),
            permissions: self.default_permissions.clone(),
            created: crate::bootstrap::get_boot_time(),
            expires: None,
            last_used: 0,
            rate_limit: Some(RateLimit { requests_per_minute: 1000, burst_size: 100, cooldown: 60 }),
        });
        
        Ok(())
    }
    
    fn authorize(&self, session: &Session, request: &ApiRequest) -> ApiResult<()> {
        // Find required permissions for the request
        let required_permissions = self.get_required_permissions(request);
        
        // Check if session has required permissions
        for permission in &required_permissions {
            if !session.permissions.contains(permission) {
                return Err(ApiError::Forbidden);
            }
        }
        
        Ok(())
    }
    
    fn get_required_permissions(&self, request: &ApiRequest) -> Vec<Permission> {
        match request {
            ApiRequest::SystemInfo | ApiRequest::MemoryStats | ApiRequest::NetworkInfo => 
                vec![Permission::SystemRead],
            ApiRequest::SystemShutdown | ApiRequest::SystemReboot | ApiRequest::LogLevel { .. } => 
                vec![Permission::SystemAdmin],
            ApiRequest::ProcessList | ApiRequest::ProcessInfo { .. } => 
                vec![Permission::ProcessRead],
            ApiRequest::ProcessTerminate { .. } => 
                vec![Permission::ProcessAdmin],
            ApiRequest::ServiceList | ApiRequest::ServiceStatus { .. } => 
                vec![Permission::ServiceRead],
            ApiRequest::ServiceStart { .. } | ApiRequest::ServiceStop { .. } | ApiRequest::ServiceRestart { .. } => 
                vec![Permission::ServiceAdmin],
            ApiRequest::SecurityStatus => 
                vec![Permission::SecurityRead],
            ApiRequest::UserList | ApiRequest::UserCreate { .. } | ApiRequest::UserDelete { .. } => 
                vec![Permission::UserAdmin],
            _ => vec![Permission::SystemRead],
        }
    }
    
    /// Validate API key
    pub fn validate_api_key(&self, api_key: &str) -> Option<Vec<Permission>> {
        let api_keys = self.api_keys.read();
        for key in api_keys.iter() {
            if key.key == api_key {
                return Some(key.permissions.clone());
            }
        }
        None
    }
    
    /// Create session
    pub fn create_session(&self, user_id: u32, username: String, permissions: Vec<Permission>) -> String {
        let session_id = generate_session_id();
        let session = Session {
            session_id: session_id.clone(),
            user_id,
            username,
            permissions,
            created: crate::bootstrap::get_boot_time(),
            last_access: crate::bootstrap::get_boot_time(),
            expires: crate::bootstrap::get_boot_time() + 3600, // 1 hour
            ip_address: "127.0.0.1".to_string(), // Placeholder
        };
        
        let mut sessions = self.sessions.lock();
        sessions.push(session);
        
        session_id
    }
    
    /// Validate session
    pub fn validate_session(&self, session_id: &str) -> Option<Session> {
        let mut sessions = self.sessions.lock();
        let current_time = crate::bootstrap::get_boot_time();
        
        for session in sessions.iter_mut() {
            if session.session_id == session_id {
                if session.expires > current_time {
                    session.last_access = current_time;
                    return Some(session.clone());
                } else {
                    // Remove expired session
                    let index = sessions.iter().position(|s| s.session_id == session_id);
                    if let Some(i) = index {
                        sessions.remove(i);
                    }
                    break;
                }
            }
        }
        
        None
    }
    
    /// Get or create default session for testing
    pub fn get_or_create_default_session(&self) -> Session {
        if let Some(session) = self.validate_session("default-session") {
            return session;
        }
        
        self.create_session(0, "admin".to_string(), self.default_permissions.clone())
    }
}

/// RateLimiter Implementation
impl RateLimiter {
    fn new(global_limit: RateLimit) -> Self {
        RateLimiter {
            entries: Mutex::new(Vec::new()),
            global_limit,
        }
    }
    
    fn initialize(&self) -> ApiResult<()> {
        info!("Initializing rate limiter");
        Ok(())
    }
    
    fn check_rate_limit(&self, key: &str) -> ApiResult<()> {
        let current_time = crate::bootstrap::get_boot_time();
        let mut entries = self.entries.lock();
        
        // Clean up expired entries
        entries.retain(|entry| entry.reset_at > current_time);
        
        // Find entry for this key
        if let Some(entry) = entries.iter_mut().find(|e| e.key == key) {
            if current_time > entry.window_start + 60 {
                // Reset window
                entry.requests = 1;
                entry.window_start = current_time;
                entry.reset_at = current_time + 60;
            } else {
                entry.requests += 1;
                
                // Check rate limit
                if entry.requests > self.global_limit.requests_per_minute {
                    return Err(ApiError::RateLimitExceeded);
                }
            }
        } else {
            // Create new entry
            entries.push(RateLimitEntry {
                key: key.to_string(),
                requests: 1,
                window_start: current_time,
                reset_at: current_time + 60,
            });
        }
        
        Ok(())
    }
}

/// RequestValidator Implementation
impl RequestValidator {
    fn new(max_size: usize) -> Self {
        RequestValidator {
            max_size,
            allowed_content_types: vec!["application/json".to_string(), "text/plain".to_string()],
            required_headers: vec!["Content-Type".to_string(), "X-API-Key".to_string()],
            banned_patterns: vec!["../".to_string(), "..\\".to_string()],
        }
    }
    
    fn validate_request(&self, request: &ApiRequest) -> ApiResult<()> {
        // Validate request size (simplified)
        let request_size = core::mem::size_of_val(request);
        if request_size > self.max_size {
            return Err(ApiError::InvalidParameter);
        }
        
        // Validate parameters based on request type
        match request {
            ApiRequest::ProcessTerminate { pid } => {
                if *pid == 0 || *pid > 65535 {
                    return Err(ApiError::InvalidParameter);
                }
            }
            ApiRequest::ProcessInfo { pid } => {
                if *pid == 0 || *pid > 65535 {
                    return Err(ApiError::InvalidParameter);
                }
            }
            ApiRequest::MemoryAlloc { size } => {
                if *size == 0 || *size > 1024 * 1024 * 1024 { // 1GB limit
                    return Err(ApiError::InvalidParameter);
                }
            }
            ApiRequest::MemoryFree { address } => {
                if *address == 0 {
                    return Err(ApiError::InvalidParameter);
                }
            }
            ApiRequest::ServiceStart { service_id } | ApiRequest::ServiceStop { service_id } | 
            ApiRequest::ServiceRestart { service_id } | ApiRequest::ServiceStatus { service_id } => {
                if service_id.0 == 0 {
                    return Err(ApiError::InvalidParameter);
                }
            }
            ApiRequest::LogLevel { level } => {
                // Validate log level
                if *level as u8 > 5 {
                    return Err(ApiError::InvalidParameter);
                }
            }
            ApiRequest::ConfigSet { key, value } => {
                if key.is_empty() || key.len() > 256 || value.len() > 1024 {
                    return Err(ApiError::InvalidParameter);
                }
            }
            _ => {
                // Other requests don't need additional validation
            }
        }
        
        // Check for banned patterns
        self.check_banned_patterns(request)?;
        
        Ok(())
    }
    
    fn check_banned_patterns(&self, request: &ApiRequest) -> ApiResult<()> {
        let request_str = format!("{:?}", request);
        
        for pattern in &self.banned_patterns {
            if request_str.contains(pattern) {
                return Err(ApiError::SecurityViolation);
            }
        }
        
        Ok(())
    }
}

/// RequestHandlers Implementation
impl RequestHandlers {
    fn new() -> Self {
        RequestHandlers {
            system_handlers: SystemHandlers,
            process_handlers: ProcessHandlers,
            memory_handlers: MemoryHandlers,
            service_handlers: ServiceHandlers,
            network_handlers: NetworkHandlers,
            security_handlers: SecurityHandlers,
        }
    }
}

/// Helper functions
fn generate_request_id() -> String {
    format!("req_{}", crate::bootstrap::get_boot_time())
}

fn generate_session_id() -> String {
    format!("sess_{}", crate::bootstrap::get_boot_time())
}

/// Initialize the administrative API server
pub fn init_admin_api(config: ApiConfig) -> ApiResult<()> {
    let mut server_guard = ADMIN_API_SERVER.lock();
    
    if server_guard.is_some() {
        return Err(ApiError::ServiceUnavailable);
    }
    
    let mut server = AdminApiServer::new(config);
    server.start()?;
    
    *server_guard = Some(server);
    
    info!("Administrative API server initialized successfully");
    Ok(())
}

/// Get the administrative API server instance
pub fn get_admin_api_server() -> Option<MutexGuard<'static, AdminApiServer>> {
    let guard = ADMIN_API_SERVER.lock();
    if guard.is_some() {
        Some(guard)
    } else {
        None
    }
}

/// Shutdown the administrative API server
pub fn shutdown_admin_api() -> ApiResult<()> {
    let mut server_guard = ADMIN_API_SERVER.lock();
    
    if let Some(server) = server_guard.as_mut() {
        server.stop()?;
    }
    
    *server_guard = None;
    
    info!("Administrative API server shutdown complete");
    Ok(())
}

/// Make administrative API request (for testing)
pub fn make_api_request(request: ApiRequest) -> ApiResult<ApiResponse> {
    let mut server_guard = ADMIN_API_SERVER.lock();
    
    if let Some(server) = server_guard.as_mut() {
        let session = server.auth_manager.get_or_create_default_session();
        server.handle_request(&request, Some(&session))
    } else {
        Err(ApiError::ServiceUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_api_response_creation() {
        let response = ApiResponse::ok(None, "Test message");
        assert!(response.success);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.message, "Test message");
    }
    
    #[test]
    fn test_api_error_creation() {
        let error = ApiError::NotFound;
        assert_eq!(error, ApiError::NotFound);
    }
    
    #[test]
    fn test_system_info_creation() {
        let info = SystemInfo {
            kernel_name: "TestOS".to_string(),
            kernel_version: "1.0.0".to_string(),
            architecture: ArchType::X86_64,
            boot_time: 1000,
            uptime: 500,
            total_memory: 1024 * 1024,
            used_memory: 512 * 1024,
            available_memory: 512 * 1024,
            cpu_count: 4,
            load_average: [0.5, 0.3, 0.2],
            processes: 10,
            services: 5,
        };
        
        assert_eq!(info.kernel_name, "TestOS");
        assert_eq!(info.architecture, ArchType::X86_64);
    }
    
    #[test]
    fn test_api_config_default() {
        let config = ApiConfig {
            enabled: true,
            port: 8080,
            max_connections: 100,
            request_timeout: 30,
            max_request_size: 1024 * 1024,
            enable_cors: true,
            enable_https: false,
            enable_authentication: true,
            enable_authorization: true,
            rate_limit_enabled: true,
            api_key_required: true,
        };
        
        assert!(config.enabled);
        assert_eq!(config.port, 8080);
        assert!(config.enable_authentication);
    }
    
    #[test]
    fn test_permission_types() {
        assert_eq!(Permission::SystemRead as u8, 1);
        assert_eq!(Permission::SystemAdmin as u8, 3);
        assert_eq!(Permission::UserAdmin as u8, 18);
    }
    
    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Info), "INFO");
        assert_eq!(format!("{}", LogLevel::Error), "ERROR");
    }
}