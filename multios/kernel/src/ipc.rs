//! Inter-Process Communication (IPC) module
//! 
//! This module provides IPC functionality between processes.

use crate::KernelResult;
use log::debug;

/// Message structure for IPC
#[derive(Debug, Clone)]
pub struct IpcMessage {
    pub sender_id: u32,
    pub receiver_id: u32,
    pub message_type: u32,
    pub data: Vec<u8>,
    pub timestamp: u64,
}

/// IPC error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcError {
    InvalidReceiver,
    MessageTooLarge,
    QueueFull,
    Timeout,
}

/// Initialize IPC system
pub fn init() -> KernelResult<()> {
    debug!("Initializing IPC system...");
    
    // TODO: Implement IPC initialization
    // - Set up message queues
    // - Initialize synchronization primitives
    // - Set up IPC endpoints
    
    debug!("IPC system initialized");
    
    Ok(())
}

/// Send a message to another process
pub fn send_message(_receiver_id: u32, message: IpcMessage) -> KernelResult<()> {
    debug!("Sending message to process {}: {:?}", _receiver_id, message);
    
    // TODO: Implement message sending
    // - Validate receiver
    // - Copy message data
    // - Wake up receiver
    
    Ok(())
}

/// Receive a message
pub fn receive_message(_receiver_id: u32) -> KernelResult<IpcMessage> {
    debug!("Receiving message for process {}", _receiver_id);
    
    // TODO: Implement message receiving
    // - Check message queue
    // - Copy message data
    // - Return message
    
    Ok(IpcMessage {
        sender_id: 1,
        receiver_id: _receiver_id,
        message_type: 0,
        data: Vec::new(),
        timestamp: 0,
    })
}

/// Create IPC endpoint
pub fn create_ipc_endpoint(_process_id: u32) -> KernelResult<u32> {
    debug!("Creating IPC endpoint for process {}", _process_id);
    
    // TODO: Implement endpoint creation
    Ok(1)
}

/// Destroy IPC endpoint
pub fn destroy_ipc_endpoint(_endpoint_id: u32) -> KernelResult<()> {
    debug!("Destroying IPC endpoint {}", _endpoint_id);
    
    // TODO: Implement endpoint destruction
    Ok(())
}
