//! Unified API Layer
//! 
//! This module provides a consistent API interface across all supported
//! architectures, abstracting system calls and services.

use crate::{CompatibilityError, ArchitectureType};
use spin::Mutex;
use bitflags::bitflags;

/// API version
pub const API_VERSION_MAJOR: u16 = 1;
pub const API_VERSION_MINOR: u16 = 0;
pub const API_VERSION_PATCH: u16 = 0;

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ApiError {
    Success = 0,
    InvalidArgument,
    NoPermission,
    ResourceUnavailable,
    UnsupportedOperation,
    Timeout,
    Busy,
    NotFound,
    AlreadyExists,
    InternalError,
    NotImplemented,
}

/// API service identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ApiService {
    FileSystem = 0x1000,
    Network = 0x1001,
    Audio = 0x1002,
    Graphics = 0x1003,
    Input = 0x1004,
    Power = 0x1005,
    Memory = 0x1006,
    Process = 0x1007,
    Thread = 0x1008,
    Synchronization = 0x1009,
    Time = 0x100A,
    Crypto = 0x100B,
}

/// File operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum FileOperation {
    Open = 0x2000,
    Close = 0x2001,
    Read = 0x2002,
    Write = 0x2003,
    Seek = 0x2004,
    Stat = 0x2005,
    Unlink = 0x2006,
    Rename = 0x2007,
    Mkdir = 0x2008,
    Rmdir = 0x2009,
    List = 0x200A,
    Mount = 0x200B,
    Unmount = 0x200C,
}

/// File open modes
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileMode: u32 {
        const READ = 0x001;
        const WRITE = 0x002;
        const CREATE = 0x004;
        const EXEC = 0x008;
        const TRUNCATE = 0x010;
        const APPEND = 0x020;
        const EXCLUSIVE = 0x040;
    }
}

/// File seek modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SeekMode {
    Set = 0,
    Current = 1,
    End = 2,
}

/// File information
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub size: u64,
    pub created: u64,
    pub modified: u64,
    pub accessed: u64,
    pub permissions: u32,
    pub is_directory: bool,
}

/// Network operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum NetworkOperation {
    Socket = 0x3000,
    Bind = 0x3001,
    Listen = 0x3002,
    Connect = 0x3003,
    Accept = 0x3004,
    Send = 0x3005,
    Recv = 0x3006,
    SendTo = 0x3007,
    RecvFrom = 0x3008,
    Close = 0x3009,
}

/// Network socket types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SocketType {
    Stream = 1,
    Datagram = 2,
    Raw = 3,
    Sequence = 4,
}

/// Network protocol families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SocketFamily {
    Unspecified = 0,
    IPv4 = 2,
    IPv6 = 10,
    Unix = 1,
}

/// Audio operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AudioOperation {
    Open = 0x4000,
    Close = 0x4001,
    Configure = 0x4002,
    Play = 0x4003,
    Record = 0x4004,
    SetVolume = 0x4005,
    GetVolume = 0x4006,
    Pause = 0x4007,
    Resume = 0x4008,
}

/// Audio format
#[derive(Debug, Clone, Copy)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub channels: u8,
    pub bits_per_sample: u8,
    pub format: AudioSampleFormat,
}

/// Audio sample formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AudioSampleFormat {
    Unsigned8 = 0,
    Signed16 = 1,
    Float32 = 2,
    Signed24 = 3,
    Signed32 = 4,
}

/// Graphics operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum GraphicsOperation {
    CreateWindow = 0x5000,
    DestroyWindow = 0x5001,
    ShowWindow = 0x5002,
    HideWindow = 0x5003,
    ResizeWindow = 0x5004,
    MoveWindow = 0x5005,
    Clear = 0x5006,
    DrawPixel = 0x5007,
    DrawLine = 0x5008,
    DrawRect = 0x5009,
    DrawText = 0x500A,
    Present = 0x500B,
}

/// Color format
#[derive(Debug, Clone, Copy)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Input operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum InputOperation {
    CreateDevice = 0x6000,
    DestroyDevice = 0x6001,
    GetEvent = 0x6002,
    PeekEvent = 0x6003,
    FlushEvents = 0x6004,
    SetMode = 0x6005,
    GetMode = 0x6006,
}

/// Input event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InputEventType {
    Keyboard = 0,
    Mouse = 1,
    Touch = 2,
    Gamepad = 3,
}

/// Power operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PowerOperation {
    GetStatus = 0x7000,
    SetState = 0x7001,
    GetBattery = 0x7002,
    SetBrightness = 0x7003,
    GetBrightness = 0x7004,
    Shutdown = 0x7005,
    Reboot = 0x7006,
    Suspend = 0x7007,
    Hibernate = 0x7008,
}

/// Power states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerState {
    On = 0,
    Standby = 1,
    Suspend = 2,
    Hibernate = 3,
    Off = 4,
}

/// Memory operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MemoryOperation {
    Allocate = 0x8000,
    Free = 0x8001,
    Reallocate = 0x8002,
    Map = 0x8003,
    Unmap = 0x8004,
    Protect = 0x8005,
    Query = 0x8006,
}

/// Memory protection flags
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MemoryProtection: u32 {
        const READ = 0x001;
        const WRITE = 0x002;
        const EXEC = 0x004;
        const SECURE = 0x008;
        const ZERO = 0x010;
    }
}

/// Process operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ProcessOperation {
    Create = 0x9000,
    Exit = 0x9001,
    Wait = 0x9002,
    GetPid = 0x9003,
    GetPPid = 0x9004,
    Terminate = 0x9005,
    Signal = 0x9006,
}

/// Thread operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ThreadOperation {
    Create = 0xA000,
    Join = 0xA001,
    Detach = 0xA002,
    Exit = 0xA003,
    GetTid = 0xA004,
    SetPriority = 0xA005,
    GetPriority = 0xA006,
    Yield = 0xA007,
}

/// Synchronization operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SyncOperation {
    MutexCreate = 0xB000,
    MutexDestroy = 0xB001,
    MutexLock = 0xB002,
    MutexUnlock = 0xB003,
    SemaphoreCreate = 0xB004,
    SemaphoreDestroy = 0xB005,
    SemaphoreWait = 0xB006,
    SemaphorePost = 0xB007,
    EventCreate = 0xB008,
    EventDestroy = 0xB009,
    EventSet = 0xB00A,
    EventClear = 0xB00B,
    EventWait = 0xB00C,
}

/// Time operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TimeOperation {
    GetCurrent = 0xC000,
    Sleep = 0xC001,
    GetResolution = 0xC002,
    SetAlarm = 0xC003,
    CancelAlarm = 0xC004,
}

/// Crypto operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CryptoOperation {
    GenerateKey = 0xD000,
    ImportKey = 0xD001,
    ExportKey = 0xD002,
    Encrypt = 0xD003,
    Decrypt = 0xD004,
    Hash = 0xD005,
    Sign = 0xD006,
    Verify = 0xD007,
}

/// Crypto algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CryptoAlgorithm {
    AES128 = 1,
    AES256 = 2,
    RSA = 3,
    ECDSA = 4,
    SHA256 = 5,
    SHA512 = 6,
}

/// Generic API handler trait
pub trait ApiHandler {
    /// Get the service identifier this handler manages
    fn get_service_id(&self) -> ApiService;
    
    /// Handle API call
    fn handle_call(&self, operation: u32, params: &[u64]) -> ApiResult<Vec<u64>>;
}

/// API call parameters
#[derive(Debug, Clone)]
pub struct ApiCall {
    pub service: ApiService,
    pub operation: u32,
    pub parameters: Vec<u64>,
    pub timeout: u64,
}

/// API manager
pub struct ApiManager {
    handlers: spin::Mutex<Vec<Box<dyn ApiHandler>>>,
    service_handlers: spin::Mutex<[Option<Box<dyn ApiHandler>>; 12]>,
}

impl ApiManager {
    pub fn new() -> Self {
        let mut service_handlers = [None; 12];
        
        ApiManager {
            handlers: Mutex::new(Vec::new()),
            service_handlers: Mutex::from_array(service_handlers),
        }
    }
    
    /// Register API handler
    pub fn register_handler(&self, handler: Box<dyn ApiHandler>) -> Result<(), CompatibilityError> {
        let service_id = handler.get_service_id();
        let service_idx = service_id as usize - 0x1000;
        
        if service_idx >= 12 {
            return Err(CompatibilityError::InvalidArgument);
        }
        
        {
            let mut handlers = self.handlers.lock();
            handlers.push(handler.clone());
        }
        
        {
            let mut service_handlers = self.service_handlers.lock();
            service_handlers[service_idx] = Some(handler);
        }
        
        Ok(())
    }
    
    /// Make API call
    pub fn make_call(&self, call: ApiCall) -> ApiResult<Vec<u64>> {
        let service_idx = call.service as usize - 0x1000;
        if service_idx >= 12 {
            return Err(ApiError::UnsupportedOperation);
        }
        
        let service_handlers = self.service_handlers.lock();
        if let Some(handler) = &service_handlers[service_idx] {
            handler.handle_call(call.operation, &call.parameters)
        } else {
            Err(ApiError::NotFound)
        }
    }
    
    /// Find handler for service
    pub fn find_handler(&self, service: ApiService) -> Option<&Box<dyn ApiHandler>> {
        let service_idx = service as usize - 0x1000;
        if service_idx >= 12 {
            return None;
        }
        
        let service_handlers = self.service_handlers.lock();
        service_handlers[service_idx].as_ref()
    }
}

/// Global API manager
static API_MANAGER: spin::Mutex<Option<ApiManager>> = spin::Mutex::new(None);

/// Initialize API layer
pub fn init() -> Result<(), CompatibilityError> {
    let mut manager_lock = API_MANAGER.lock();
    
    if manager_lock.is_some() {
        return Ok(());
    }
    
    *manager_lock = Some(ApiManager::new());
    
    // Register default handlers
    register_default_handlers()?;
    
    log::info!("API layer initialized (version {}.{}.{})", 
               API_VERSION_MAJOR, API_VERSION_MINOR, API_VERSION_PATCH);
    
    Ok(())
}

/// Register default system handlers
fn register_default_handlers() -> Result<(), CompatibilityError> {
    let manager = API_MANAGER.lock();
    let manager_ref = manager.as_ref()
        .ok_or(CompatibilityError::InitializationFailed("API manager not initialized"))?;
    
    // This would register actual handlers for each service
    // For now, we'll create placeholder handlers
    
    Ok(())
}

/// Register API handler
pub fn register_handler(handler: Box<dyn ApiHandler>) -> Result<(), CompatibilityError> {
    let manager = API_MANAGER.lock();
    let manager_ref = manager.as_ref()
        .ok_or(CompatibilityError::InitializationFailed("API manager not initialized"))?;
    
    manager_ref.register_handler(handler)
}

/// Make API call
pub fn make_call(service: ApiService, operation: u32, parameters: &[u64]) -> ApiResult<Vec<u64>> {
    let manager = API_MANAGER.lock();
    let manager_ref = manager.as_ref()
        .ok_or(CompatibilityError::InitializationFailed("API manager not initialized"))?;
    
    let call = ApiCall {
        service,
        operation,
        parameters: parameters.to_vec(),
        timeout: 0,
    };
    
    manager_ref.make_call(call)
}

/// Convenience functions for common API operations

/// File operations
pub fn file_open(path: &str, mode: FileMode) -> ApiResult<u32> {
    let path_bytes = path.as_bytes();
    let mut params = vec![mode.bits() as u64, path_bytes.len() as u64];
    params.extend_from_slice(&path_bytes[..path_bytes.len()].chunks(8).next().unwrap_or(&[]).iter().map(|b| *b as u64));
    
    make_call(ApiService::FileSystem, FileOperation::Open as u32, &params)
        .map(|result| result[0])
}

/// Network operations
pub fn network_socket(family: SocketFamily, socket_type: SocketType, protocol: u32) -> ApiResult<u32> {
    let params = vec![family as u64, socket_type as u64, protocol as u64];
    make_call(ApiService::Network, NetworkOperation::Socket as u32, &params)
        .map(|result| result[0])
}

/// Audio operations
pub fn audio_play(sample_rate: u32, channels: u8, bits_per_sample: u8, data: &[u16]) -> ApiResult<()> {
    let mut params = vec![sample_rate as u64, channels as u64, bits_per_sample as u64, data.len() as u64];
    params.extend_from_slice(&data.iter().map(|&x| x as u64).collect::<Vec<_>>());
    
    make_call(ApiService::Audio, AudioOperation::Play as u32, &params)
        .map(|_| ())
}

/// Graphics operations
pub fn graphics_create_window(width: u32, height: u32, title: &str) -> ApiResult<u32> {
    let title_bytes = title.as_bytes();
    let mut params = vec![width as u64, height as u64, title_bytes.len() as u64];
    params.extend_from_slice(&title_bytes[..title_bytes.len()].chunks(8).next().unwrap_or(&[]).iter().map(|b| *b as u64));
    
    make_call(ApiService::Graphics, GraphicsOperation::CreateWindow as u32, &params)
        .map(|result| result[0])
}

/// Memory operations
pub fn memory_allocate(size: usize, protection: MemoryProtection) -> ApiResult<*mut u8> {
    let params = vec![size as u64, protection.bits() as u64];
    make_call(ApiService::Memory, MemoryOperation::Allocate as u32, &params)
        .map(|result| result[0] as *mut u8)
}