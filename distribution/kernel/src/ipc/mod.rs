//! MultiOS Inter-Process Communication Module
//! 
//! This module provides IPC mechanisms for process communication.
//! Integrates with the comprehensive IPC library system.

use crate::log::{info, warn, error};
use spin::Mutex;
use alloc::collections::BTreeMap;

/// IPC initialization
pub fn init() -> Result<(), crate::KernelError> {
    info!("Initializing IPC system...");
    
    // Initialize the IPC library
    match libraries::ipc::init() {
        Ok(()) => {
            info!("IPC system initialized successfully");
            Ok(())
        }
        Err(e) => {
            error!("Failed to initialize IPC system: {:?}", e);
            Err(crate::KernelError::SystemError)
        }
    }
}

/// IPC message types
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum IpcMessageType {
    Signal = 0,
    Data = 1,
    Event = 2,
    Request = 3,
    Response = 4,
}

/// IPC message
#[derive(Debug, Clone)]
pub struct IpcMessage {
    pub message_type: IpcMessageType,
    pub sender_pid: u32,
    pub receiver_pid: u32,
    pub data: Vec<u8>,
    pub timestamp: u64,
}

/// IPC channel state
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum IpcChannelState {
    Inactive = 0,
    Active = 1,
    Paused = 2,
    Full = 3,
}

/// Kernel-level IPC manager
pub struct KernelIpcManager {
    /// Active process IPC states
    pub process_states: BTreeMap<u32, ProcessIpcState>,
    /// Global statistics
    pub statistics: KernelIpcStatistics,
}

/// Process IPC state
#[derive(Debug, Clone)]
pub struct ProcessIpcState {
    pub pid: u32,
    pub registered_channels: Vec<u32>,
    pub registered_shared_memory: Vec<u32>,
    pub registered_semaphores: Vec<u32>,
    pub signal_handlers: BTreeMap<u32, u32>,
}

/// IPC system statistics
#[derive(Debug, Clone, Default)]
pub struct KernelIpcStatistics {
    pub total_messages_processed: u64,
    pub total_channels_created: u32,
    pub total_shared_memory_segments: u32,
    pub total_semaphores_created: u32,
    pub active_processes: u32,
    pub ipc_errors: u32,
}

/// Global IPC manager instance
pub static KERNEL_IPC_MANAGER: Mutex<Option<KernelIpcManager>> = Mutex::new(None);

/// Initialize kernel IPC manager
pub fn init_kernel_ipc() -> Result<(), crate::KernelError> {
    info!("Initializing kernel IPC manager...");
    
    let mut manager_guard = KERNEL_IPC_MANAGER.lock();
    let manager = KernelIpcManager {
        process_states: BTreeMap::new(),
        statistics: KernelIpcStatistics::default(),
    };
    *manager_guard = Some(manager);
    
    info!("Kernel IPC manager initialized");
    Ok(())
}

/// Register process with IPC system
pub fn register_process_ipc(pid: u32) -> Result<(), crate::KernelError> {
    let mut manager_guard = KERNEL_IPC_MANAGER.lock();
    
    if let Some(ref mut manager) = *manager_guard {
        if !manager.process_states.contains_key(&pid) {
            let process_state = ProcessIpcState {
                pid,
                registered_channels: Vec::new(),
                registered_shared_memory: Vec::new(),
                registered_semaphores: Vec::new(),
                signal_handlers: BTreeMap::new(),
            };
            manager.process_states.insert(pid, process_state);
            manager.statistics.active_processes += 1;
            
            info!("Registered process {} with IPC system", pid);
            Ok(())
        } else {
            warn!("Process {} already registered with IPC", pid);
            Ok(())
        }
    } else {
        error!("IPC manager not initialized");
        Err(crate::KernelError::SystemError)
    }
}

/// Unregister process from IPC system
pub fn unregister_process_ipc(pid: u32) -> Result<(), crate::KernelError> {
    let mut manager_guard = KERNEL_IPC_MANAGER.lock();
    
    if let Some(ref mut manager) = *manager_guard {
        if manager.process_states.remove(&pid).is_some() {
            manager.statistics.active_processes -= 1;
            info!("Unregistered process {} from IPC system", pid);
            Ok(())
        } else {
            warn!("Process {} was not registered with IPC", pid);
            Ok(())
        }
    } else {
        error!("IPC manager not initialized");
        Err(crate::KernelError::SystemError)
    }
}

/// Get IPC system statistics
pub fn get_ipc_statistics() -> KernelIpcStatistics {
    let manager_guard = KERNEL_IPC_MANAGER.lock();
    
    if let Some(ref manager) = *manager_guard {
        manager.statistics.clone()
    } else {
        KernelIpcStatistics::default()
    }
}

/// Send IPC message to process
pub fn send_ipc_message(
    sender_pid: u32, 
    receiver_pid: u32, 
    message_type: IpcMessageType, 
    data: Vec<u8>
) -> Result<(), crate::KernelError> {
    let message = IpcMessage {
        message_type,
        sender_pid,
        receiver_pid,
        data,
        timestamp: 0, // Would set actual timestamp
    };
    
    info!("IPC message: {:?} from {} to {}", message_type, sender_pid, receiver_pid);
    
    // In real implementation, would deliver message to target process
    // This involves scheduler integration and process state management
    
    Ok(())
}

/// Handle IPC system calls
pub fn handle_ipc_syscall(syscall: &crate::syscall::Syscall, pid: u32) -> Result<i32, crate::KernelError> {
    match syscall.number {
        crate::syscall::SYS_IPC_CREATE_CHANNEL => {
            let buffer_size = syscall.args[0] as usize;
            match libraries::ipc::create_channel(buffer_size) {
                Ok(handle) => Ok(handle.id as i32),
                Err(_) => Err(crate::KernelError::SystemError),
            }
        }
        crate::syscall::SYS_IPC_CREATE_SEMAPHORE => {
            let initial_value = syscall.args[0] as u32;
            match libraries::ipc::create_semaphore(initial_value) {
                Ok(handle) => Ok(handle.id as i32),
                Err(_) => Err(crate::KernelError::SystemError),
            }
        }
        crate::syscall::SYS_IPC_CREATE_PIPE => {
            let buffer_size = syscall.args[0] as usize;
            let flags = libraries::ipc::pipes::PipeFlags::empty();
            match libraries::ipc::create_pipe(buffer_size, flags) {
                Ok(pipe) => Ok(pipe.id as i32),
                Err(_) => Err(crate::KernelError::SystemError),
            }
        }
        crate::syscall::SYS_IPC_CREATE_EVENT => {
            let event_type = libraries::ipc::events::EventType::ManualReset;
            let flags = libraries::ipc::events::EventFlags::empty();
            match libraries::ipc::create_event(event_type, flags) {
                Ok(handle) => Ok(handle.id as i32),
                Err(_) => Err(crate::KernelError::SystemError),
            }
        }
        _ => {
            warn!("Unknown IPC syscall: {}", syscall.number);
            Err(crate::KernelError::InvalidSyscall)
        }
    }
}