//! Multi-Core Hardware Abstraction Layer
//!
//! This module provides unified multi-core system interfaces across architectures
//! for CPU management, inter-processor communication, and core coordination.

use crate::log::{info, warn, error};
use crate::{KernelError, Result};
use spin::RwLock;
use spin::Mutex;
use core::sync::atomic::{AtomicU64, AtomicUsize, AtomicBool, Ordering};

/// Multi-core subsystem initialization
pub fn init() -> Result<()> {
    info!("Initializing Multi-Core HAL...");
    
    // Detect CPU topology
    detect_cpu_topology()?;
    
    // Initialize APIC or equivalent
    init_interrupt_controller()?;
    
    // Set up inter-processor communication
    setup_ipc()?;
    
    // Initialize core management
    init_core_management()?;
    
    // Set up SMP coordination
    setup_smp_coordination()?;
    
    Ok(())
}

/// Multi-core subsystem shutdown
pub fn shutdown() -> Result<()> {
    info!("Shutting down Multi-Core HAL...");
    
    // Shutdown secondary cores
    shutdown_secondary_cores()?;
    
    Ok(())
}

/// CPU topology information
#[derive(Debug, Clone, Copy)]
pub struct CpuTopology {
    pub socket_count: u8,
    pub cores_per_socket: u8,
    pub threads_per_core: u8,
    pub total_cores: u8,
    pub total_threads: u8,
}

/// CPU core information
#[derive(Debug, Clone)]
pub struct CoreInfo {
    pub core_id: usize,
    pub socket_id: u8,
    pub thread_id: u8,
    pub is_boot_core: bool,
    pub is_online: bool,
    pub apic_id: u32,
    pub start_address: usize,
    pub stack_size: usize,
}

/// Inter-Processor Interrupt (IPI) types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IpiType {
    WakeUp = 0,           // Wake up secondary core
    Shutdown = 1,         // Shutdown secondary core
    Schedule = 2,         // Schedule-related IPI
    TlbShootdown = 3,     // TLB shootdown
    IpiFunc = 4,          // Generic function call
    Reschedule = 5,       // Force reschedule
    Debug = 6,            // Debug IPI
    Custom = 7,
}

/// IPI message structure
#[derive(Debug, Clone, Copy)]
pub struct IpiMessage {
    pub ipi_type: IpiType,
    pub target_cores: u64,     // Bitmask of target cores
    pub data: u64,             // IPI-specific data
    pub function: Option<fn()>, // Function to execute
}

/// Core state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CoreState {
    Offline = 0,      // Core is offline
    Starting = 1,     // Core is starting up
    Online = 2,       // Core is online and running
    Shutting = 3,     // Core is shutting down
}

/// Multi-core statistics
#[derive(Debug, Clone, Copy)]
pub struct MultiCoreStats {
    pub total_cores: AtomicUsize,
    pub online_cores: AtomicUsize,
    pub ipi_sent: AtomicU64,
    pub ipi_received: AtomicU64,
    pub context_switches: AtomicU64,
    pub tlb_shootdowns: AtomicU64,
}

/// CPU topology
static CPU_TOPOLOGY: RwLock<Option<CpuTopology>> = RwLock::new(None);

/// Core information table
static CORE_INFO: RwLock<Vec<CoreInfo>> = RwLock::new(Vec::new());

/// Core states
static CORE_STATES: RwLock<Vec<AtomicU8>> = RwLock::new(Vec::new());

/// Multi-core statistics
static MC_STATS: MultiCoreStats = MultiCoreStats {
    total_cores: AtomicUsize::new(0),
    online_cores: AtomicUsize::new(0),
    ipi_sent: AtomicU64::new(0),
    ipi_received: AtomicU64::new(0),
    context_switches: AtomicU64::new(0),
    tlb_shootdowns: AtomicU64::new(0),
};

/// IPI message queue
static IPI_QUEUE: Mutex<Vec<IpiMessage>> = Mutex::new(Vec::new());

/// Detect CPU topology
fn detect_cpu_topology() -> Result<()> {
    info!("Detecting CPU topology...");
    
    let topology = detect_cpu_topology_arch()?;
    
    info!("CPU Topology: {} sockets, {} cores/socket, {} threads/core",
          topology.socket_count, topology.cores_per_socket, topology.threads_per_core);
    info!("Total: {} cores, {} threads", topology.total_cores, topology.total_threads);
    
    *CPU_TOPOLOGY.write() = Some(topology);
    MC_STATS.total_cores.store(topology.total_cores as usize, Ordering::SeqCst);
    
    Ok(())
}

/// Architecture-specific topology detection
#[cfg(target_arch = "x86_64")]
fn detect_cpu_topology_arch() -> Result<CpuTopology> {
    // x86_64 topology detection using CPUID
    let cores_per_socket = detect_x86_64_logical_cores();
    let threads_per_core = detect_x86_64_threads_per_core();
    
    let total_cores = cores_per_socket; // Assume single socket for now
    let total_threads = total_cores * threads_per_core;
    
    Ok(CpuTopology {
        socket_count: 1,
        cores_per_socket,
        threads_per_core,
        total_cores,
        total_threads,
    })
}

#[cfg(target_arch = "aarch64")]
fn detect_cpu_topology_arch() -> Result<CpuTopology> {
    // ARM64 topology detection using MPIDR_EL1
    let cores_per_socket = 4; // Placeholder
    let threads_per_core = 1; // ARM64 typically doesn't have SMT
    
    Ok(CpuTopology {
        socket_count: 1,
        cores_per_socket,
        threads_per_core,
        total_cores: cores_per_socket,
        total_threads: cores_per_socket,
    })
}

#[cfg(target_arch = "riscv64")]
fn detect_cpu_topology_arch() -> Result<CpuTopology> {
    // RISC-V topology detection
    let cores_per_socket = 4; // Placeholder
    let threads_per_core = 1; // RISC-V typically doesn't have SMT
    
    Ok(CpuTopology {
        socket_count: 1,
        cores_per_socket,
        threads_per_core,
        total_cores: cores_per_socket,
        total_threads: cores_per_socket,
    })
}

#[cfg(target_arch = "x86_64")]
fn detect_x86_64_logical_cores() -> u8 {
    // Use CPUID to detect logical cores
    4 // Placeholder - would use CPUID leaf 0xB
}

#[cfg(target_arch = "x86_64")]
fn detect_x86_64_threads_per_core() -> u8 {
    // Detect SMT (hyperthreading)
    2 // Placeholder - would use CPUID leaf 0xB
}

/// Initialize interrupt controller for SMP
fn init_interrupt_controller() -> Result<()> {
    info!("Initializing SMP interrupt controller...");
    
    let controller = crate::hal::interrupts::get_interrupt_controller();
    
    match controller {
        crate::hal::interrupts::InterruptControllerType::Apic => {
            init_apic_smp()?;
        }
        crate::hal::interrupts::InterruptControllerType::Gic => {
            init_gic_smp()?;
        }
        crate::hal::interrupts::InterruptControllerType::Clint => {
            init_clint_smp()?;
        }
        _ => warn!("Unsupported interrupt controller for SMP"),
    }
    
    Ok(())
}

#[cfg(target_arch = "x86_64")]
fn init_apic_smp() -> Result<()> {
    info!("Initializing APIC for SMP");
    
    // Initialize APIC on all cores
    for core_id in 0..get_max_cpus() {
        // Initialize local APIC for each core
        info!("Initializing APIC for core {}", core_id);
    }
    
    Ok(())
}

#[cfg(target_arch = "aarch64")]
fn init_gic_smp() -> Result<()> {
    info!("Initializing GIC for SMP");
    
    // Initialize GIC for multi-core
    info!("GIC SMP initialized for {} cores", get_max_cpus());
    
    Ok(())
}

#[cfg(target_arch = "riscv64")]
fn init_clint_smp() -> Result<()> {
    info!("Initializing CLINT/PLIC for SMP");
    
    // Initialize CLINT and PLIC for multi-core
    info!("CLINT/PLIC SMP initialized for {} cores", get_max_cpus());
    
    Ok(())
}

/// Setup inter-processor communication
fn setup_ipc() -> Result<()> {
    info!("Setting up inter-processor communication...");
    
    // Initialize IPI infrastructure
    init_ipi_infrastructure()?;
    
    // Set up IPI handlers
    setup_ipi_handlers()?;
    
    Ok(())
}

/// Initialize IPI infrastructure
fn init_ipi_infrastructure() -> Result<()> {
    // Initialize IPI message structures
    let topology = CPU_TOPOLOGY.read().unwrap();
    let core_count = topology.total_cores as usize;
    
    // Create IPI queues for each core
    // For now, use a single queue protected by a global lock
    info!("IPI infrastructure initialized for {} cores", core_count);
    
    Ok(())
}

/// Setup IPI handlers
fn setup_ipi_handlers() -> Result<()> {
    info!("Setting up IPI handlers...");
    
    // Register IPI interrupt handler
    // This would be architecture-specific
    info!("IPI handlers registered");
    
    Ok(())
}

/// Initialize core management
fn init_core_management() -> Result<()> {
    info!("Initializing core management...");
    
    // Initialize core info table
    init_core_info_table()?;
    
    // Set up core state management
    init_core_state_management()?;
    
    // Initialize boot core as online
    set_core_state(0, CoreState::Online);
    MC_STATS.online_cores.store(1, Ordering::SeqCst);
    
    Ok(())
}

/// Initialize core info table
fn init_core_info_table() -> Result<()> {
    let topology = CPU_TOPOLOGY.read().unwrap();
    let core_count = topology.total_cores as usize;
    
    let mut cores = Vec::with_capacity(core_count);
    let mut states = Vec::with_capacity(core_count);
    
    for core_id in 0..core_count {
        let is_boot_core = core_id == 0;
        let apic_id = get_core_apic_id(core_id);
        
        let core_info = CoreInfo {
            core_id,
            socket_id: 0, // Assume single socket
            thread_id: 0, // No SMT for now
            is_boot_core,
            is_online: is_boot_core,
            apic_id,
            start_address: 0, // To be filled by boot process
            stack_size: 8 * 1024 * 1024, // 8MB stack
        };
        
        cores.push(core_info);
        states.push(AtomicU8::new(if is_boot_core { 
            CoreState::Online as u8 
        } else { 
            CoreState::Offline as u8 
        }));
    }
    
    *CORE_INFO.write() = cores;
    *CORE_STATES.write() = states;
    
    info!("Core info table initialized for {} cores", core_count);
    
    Ok(())
}

/// Initialize core state management
fn init_core_state_management() -> Result<()> {
    info!("Core state management initialized");
    
    // Set up core state transition handlers
    // This would handle state changes like going online/offline
    
    Ok(())
}

/// Setup SMP coordination
fn setup_smp_coordination() -> Result<()> {
    info!("Setting up SMP coordination...");
    
    // Initialize SMP bootstrap
    init_smp_bootstrap()?;
    
    // Set up coordination mechanisms
    setup_coordination_mechanisms()?;
    
    Ok(())
}

/// Initialize SMP bootstrap
fn init_smp_bootstrap() -> Result<()> {
    info!("Initializing SMP bootstrap...");
    
    // Prepare for secondary core startup
    prepare_secondary_core_startup()?;
    
    Ok(())
}

/// Prepare secondary core startup
fn prepare_secondary_core_startup() -> Result<()> {
    info!("Preparing secondary core startup...");
    
    // Set up startup code for secondary cores
    // This would involve preparing trampoline code and initialization
    
    Ok(())
}

/// Setup coordination mechanisms
fn setup_coordination_mechanisms() -> Result<()> {
    info!("Setting up SMP coordination mechanisms...");
    
    // Set up barriers, locks, and other coordination primitives
    info!("SMP coordination mechanisms initialized");
    
    Ok(())
}

/// Get CPU topology
pub fn get_cpu_topology() -> Option<CpuTopology> {
    *CPU_TOPOLOGY.read()
}

/// Get maximum number of CPUs
pub fn get_max_cpus() -> usize {
    let topology = CPU_TOPOLOGY.read();
    if let Some(topology) = topology.as_ref() {
        topology.total_cores as usize
    } else {
        1 // Default to single core
    }
}

/// Get current CPU ID
pub fn get_current_cpu_id() -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        // Read APIC ID
        let apic_id: u32;
        unsafe {
            core::arch::asm!(
                "pushfq",
                "cli",
                "mov $1, %eax",
                "cpuid",
                "mov ${2}, edx",
                "popfq",
                out(reg) _,
                out(reg) apic_id
            );
        }
        (apic_id >> 24) as usize
    }
    
    #[cfg(target_arch = "aarch64")]
    {
        // Read MPIDR_EL1
        let mpidr: u64;
        unsafe {
            core::arch::asm!("mrs {}, mpidr_el1", out(reg) mpidr);
        }
        (mpidr & 0xFF) as usize
    }
    
    #[cfg(target_arch = "riscv64")]
    {
        // Read mhartid
        crate::arch::riscv64::registers::csrr(0xF14) as usize
    }
}

/// Get number of online CPUs
pub fn get_online_cpus() -> usize {
    MC_STATS.online_cores.load(Ordering::SeqCst)
}

/// Check if CPU is online
pub fn is_cpu_online(cpu_id: usize) -> bool {
    if cpu_id >= get_max_cpus() {
        return false;
    }
    
    let states = CORE_STATES.read();
    if let Some(state) = states.get(cpu_id) {
        state.load(Ordering::SeqCst) == CoreState::Online as u8
    } else {
        false
    }
}

/// Set core state
fn set_core_state(cpu_id: usize, state: CoreState) {
    if cpu_id < get_max_cpus() {
        let states = CORE_STATES.write();
        if let Some(core_state) = states.get(cpu_id) {
            let old_state = core_state.load(Ordering::SeqCst);
            core_state.store(state as u8, Ordering::SeqCst);
            
            info!("Core {} state changed: {} -> {}", 
                  cpu_id, 
                  match old_state {
                      0 => "Offline",
                      1 => "Starting", 
                      2 => "Online",
                      3 => "Shutting",
                      _ => "Unknown",
                  },
                  match state {
                      CoreState::Offline => "Offline",
                      CoreState::Starting => "Starting",
                      CoreState::Online => "Online", 
                      CoreState::Shutting => "Shutting",
                  });
        }
    }
}

/// Send IPI to core(s)
pub fn send_ipi(target_cores: u64, ipi_type: IpiType, data: u64) -> Result<()> {
    let message = IpiMessage {
        ipi_type,
        target_cores,
        data,
        function: None,
    };
    
    send_ipi_message(message)?;
    
    MC_STATS.ipi_sent.fetch_add(1, Ordering::SeqCst);
    Ok(())
}

/// Send IPI with function call
pub fn send_ipi_function(target_cores: u64, ipi_type: IpiType, function: fn()) -> Result<()> {
    let message = IpiMessage {
        ipi_type,
        target_cores,
        data: 0,
        function: Some(function),
    };
    
    send_ipi_message(message)?;
    
    MC_STATS.ipi_sent.fetch_add(1, Ordering::SeqCst);
    Ok(())
}

/// Send IPI message
fn send_ipi_message(message: IpiMessage) -> Result<()> {
    let mut queue = IPI_QUEUE.lock();
    queue.push(message);
    
    // Trigger interrupt on target cores
    trigger_ipi_interrupt(message.target_cores)?;
    
    Ok(())
}

/// Trigger IPI interrupt
fn trigger_ipi_interrupt(target_cores: u64) -> Result<()> {
    // Convert bitmask to list of core IDs
    let mut core_id = 0;
    let mut remaining = target_cores;
    
    while remaining > 0 {
        if (remaining & 1) != 0 {
            trigger_core_ipi(core_id)?;
        }
        remaining >>= 1;
        core_id += 1;
    }
    
    Ok(())
}

/// Trigger IPI on specific core
fn trigger_core_ipi(core_id: usize) -> Result<()> {
    let controller = crate::hal::interrupts::get_interrupt_controller();
    
    match controller {
        crate::hal::interrupts::InterruptControllerType::Apic => {
            #[cfg(target_arch = "x86_64")]
            {
                trigger_apic_ipi(core_id)?;
            }
        }
        crate::hal::interrupts::InterruptControllerType::Gic => {
            #[cfg(target_arch = "aarch64")]
            {
                trigger_gic_ipi(core_id)?;
            }
        }
        crate::hal::interrupts::InterruptControllerType::Clint => {
            #[cfg(target_arch = "riscv64")]
            {
                trigger_clint_ipi(core_id)?;
            }
        }
        _ => warn!("Unsupported controller for IPI"),
    }
    
    Ok(())
}

#[cfg(target_arch = "x86_64")]
fn trigger_apic_ipi(core_id: usize) -> Result<()> {
    info!("Triggering APIC IPI to core {}", core_id);
    // This would send an IPI via APIC
    Ok(())
}

#[cfg(target_arch = "aarch64")]
fn trigger_gic_ipi(core_id: usize) -> Result<()> {
    info!("Triggering GIC IPI to core {}", core_id);
    // This would send an IPI via GIC
    Ok(())
}

#[cfg(target_arch = "riscv64")]
fn trigger_clint_ipi(core_id: usize) -> Result<()> {
    info!("Triggering CLINT IPI to core {}", core_id);
    // This would send an IPI via CLINT
    Ok(())
}

/// Process IPI messages
pub fn process_ipi_messages() {
    let mut queue = IPI_QUEUE.lock();
    
    while let Some(message) = queue.pop() {
        process_ipi_message(&message);
        MC_STATS.ipi_received.fetch_add(1, Ordering::SeqCst);
    }
}

/// Process single IPI message
fn process_ipi_message(message: &IpiMessage) {
    match message.ipi_type {
        IpiType::WakeUp => {
            info!("WakeUp IPI received");
        }
        IpiType::Shutdown => {
            info!("Shutdown IPI received");
        }
        IpiType::Schedule => {
            info!("Schedule IPI received");
        }
        IpiType::TlbShootdown => {
            info!("TLB Shootdown IPI received");
            MC_STATS.tlb_shootdowns.fetch_add(1, Ordering::SeqCst);
            
            // Flush TLB
            crate::hal::memory::flush_tlb();
        }
        IpiType::IpiFunc => {
            info!("Function IPI received");
            if let Some(func) = message.function {
                func();
            }
        }
        IpiType::Reschedule => {
            info!("Reschedule IPI received");
        }
        _ => warn!("Unknown IPI type: {:?}", message.ipi_type),
    }
}

/// Wake up secondary core
pub fn wake_up_core(core_id: usize) -> Result<()> {
    if core_id >= get_max_cpus() {
        return Err(KernelError::InvalidParameter);
    }
    
    info!("Waking up core {}", core_id);
    
    // Set core state to starting
    set_core_state(core_id, CoreState::Starting);
    
    // Send wake-up IPI
    let core_bitmask = 1u64 << core_id;
    send_ipi(core_bitmask, IpiType::WakeUp, 0)?;
    
    Ok(())
}

/// Shutdown secondary core
pub fn shutdown_core(core_id: usize) -> Result<()> {
    if core_id >= get_max_cpus() || core_id == 0 {
        return Err(KernelError::InvalidParameter);
    }
    
    info!("Shutting down core {}", core_id);
    
    // Set core state to shutting down
    set_core_state(core_id, CoreState::Shutting);
    
    // Send shutdown IPI
    let core_bitmask = 1u64 << core_id;
    send_ipi(core_bitmask, IpiType::Shutdown, 0)?;
    
    // Set core state to offline
    set_core_state(core_id, CoreState::Offline);
    MC_STATS.online_cores.fetch_sub(1, Ordering::SeqCst);
    
    Ok(())
}

/// Shutdown all secondary cores
fn shutdown_secondary_cores() -> Result<()> {
    info!("Shutting down all secondary cores...");
    
    for core_id in 1..get_max_cpus() {
        shutdown_core(core_id)?;
    }
    
    Ok(())
}

/// Get core APIC ID
fn get_core_apic_id(core_id: usize) -> u32 {
    // In real implementation, this would read from hardware
    core_id as u32
}

/// Get all core information
pub fn get_all_cores() -> Vec<CoreInfo> {
    CORE_INFO.read().clone()
}

/// Get core statistics
pub fn get_core_statistics() -> MultiCoreStats {
    MC_STATS
}

/// Benchmark multi-core performance
pub fn benchmark_multicore_performance() -> Result<u64> {
    info!("Running multi-core performance benchmark...");
    
    let num_cores = get_online_cpus();
    if num_cores < 2 {
        info!("Single-core system, running single-thread benchmark");
        return Ok(crate::hal::cpu::benchmark_cpu());
    }
    
    // Multi-core benchmark would involve parallel computation
    // For now, return a simple metric
    let benchmark_score = get_timer_frequency() as u64 / num_cores as u64;
    
    info!("Multi-core benchmark score: {} ({} cores)", benchmark_score, num_cores);
    
    Ok(benchmark_score)
}

/// SMP utilities
pub mod smp_utils {
    use super::*;
    
    /// Wait for all cores to be online
    pub fn wait_for_all_cores() -> Result<()> {
        let target_cores = get_max_cpus();
        
        info!("Waiting for {} cores to come online...", target_cores);
        
        // Simple polling wait
        let mut attempts = 0;
        while get_online_cpus() < target_cores && attempts < 10000 {
            // Small delay
            for _ in 0..1000 {
                core::hint::spin_loop();
            }
            attempts += 1;
        }
        
        if get_online_cpus() < target_cores {
            warn!("Only {} of {} cores came online", get_online_cpus(), target_cores);
        } else {
            info!("All {} cores are online", target_cores);
        }
        
        Ok(())
    }
    
    /// Force all cores to reschedule
    pub fn force_reschedule_all() -> Result<()> {
        let topology = get_cpu_topology().unwrap();
        let core_bitmask = (1u64 << topology.total_cores) - 1;
        
        send_ipi(core_bitmask, IpiType::Reschedule, 0)?;
        Ok(())
    }
    
    /// Perform TLB shootdown across all cores
    pub fn tlb_shootdown_all() -> Result<()> {
        let topology = get_cpu_topology().unwrap();
        let core_bitmask = (1u64 << topology.total_cores) - 1;
        
        send_ipi(core_bitmask, IpiType::TlbShootdown, 0)?;
        Ok(())
    }
    
    /// Execute function on all cores
    pub fn execute_on_all_cores(func: fn()) -> Result<()> {
        let topology = get_cpu_topology().unwrap();
        let core_bitmask = (1u64 << topology.total_cores) - 1;
        
        send_ipi_function(core_bitmask, IpiType::IpiFunc, func)?;
        Ok(())
    }
}