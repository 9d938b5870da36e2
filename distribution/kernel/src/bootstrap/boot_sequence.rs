//! MultiOS Bootstrap Sequence Manager
//! 
//! This module manages the ordered bootstrap sequence and handles
//! the transition from early initialization to full kernel operation.

use crate::bootstrap::{BootstrapContext, BootstrapResult};
use crate::log::{info, warn, error};

/// Initialize core device drivers
pub fn init_core_drivers(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing core device drivers...");
    
    // Initialize storage drivers
    init_storage_drivers(context)?;
    
    // Initialize network drivers
    init_network_drivers(context)?;
    
    // Initialize input drivers
    init_input_drivers(context)?;
    
    // Initialize display drivers
    init_display_drivers(context)?;
    
    // Initialize bus drivers (PCI, USB, etc.)
    init_bus_drivers(context)?;
    
    info!("Core drivers initialized successfully");
    Ok(())
}

/// Initialize storage drivers
fn init_storage_drivers(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing storage drivers...");
    
    // Detect available storage devices
    let storage_devices = detect_storage_devices(context)?;
    
    info!("Detected {} storage devices", storage_devices.len());
    
    // Initialize detected storage drivers
    for device in storage_devices {
        match device {
            StorageDevice::Ata => init_ata_driver(context)?,
            StorageDevice::Nvme => init_nvme_driver(context)?,
            StorageDevice::Scsi => init_scsi_driver(context)?,
            StorageDevice::Usb => init_usb_storage_driver(context)?,
        }
    }
    
    Ok(())
}

/// Initialize network drivers
fn init_network_drivers(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing network drivers...");
    
    // Detect network devices and initialize appropriate drivers
    // This is simplified for bootstrap
    
    Ok(())
}

/// Initialize input drivers
fn init_input_drivers(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing input drivers...");
    
    // Initialize keyboard driver
    init_keyboard_driver(context)?;
    
    // Initialize mouse/touch drivers
    init_mouse_driver(context)?;
    
    Ok(())
}

/// Initialize display drivers
fn init_display_drivers(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing display drivers...");
    
    // Detect display hardware and initialize appropriate drivers
    match context.boot_info.framebuffer {
        Some(fb) => {
            info!("Framebuffer detected: {}x{}x{}", fb.width, fb.height, fb.bpp);
            init_framebuffer_driver(context, fb)?;
        }
        None => {
            warn!("No framebuffer detected, using text mode");
        }
    }
    
    Ok(())
}

/// Initialize bus drivers
fn init_bus_drivers(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing bus drivers...");
    
    // Initialize PCI bus
    init_pci_bus(context)?;
    
    // Initialize USB bus
    init_usb_bus(context)?;
    
    // Initialize ACPI
    init_acpi(context)?;
    
    Ok(())
}

/// Initialize scheduler
pub fn init_scheduler(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing scheduler...");
    
    // Create default scheduler configuration
    let scheduler_config = crate::scheduler::SchedulerConfig {
        quantum_milliseconds: 10,
        max_threads: 1000,
        enable_preemption: true,
        scheduling_policy: crate::scheduler::SchedulingPolicy::RoundRobin,
    };
    
    // Initialize scheduler with configuration
    crate::scheduler::init_with_config(scheduler_config)?;
    
    // Initialize process management
    init_process_management(context)?;
    
    // Initialize thread management
    init_thread_management(context)?;
    
    // Initialize scheduling algorithms
    init_scheduling_algorithms(context)?;
    
    // Setup idle task
    setup_idle_task(context)?;
    
    info!("Scheduler initialized successfully");
    Ok(())
}

/// Initialize user mode
pub fn init_user_mode(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing user mode environment...");
    
    // Initialize system call interface
    init_system_calls(context)?;
    
    // Initialize user memory management
    init_user_memory(context)?;
    
    // Create initial user processes
    create_initial_processes(context)?;
    
    // Setup user space interfaces
    setup_user_interfaces(context)?;
    
    info!("User mode initialized successfully");
    Ok(())
}

/// Initialize system call interface
fn init_system_calls(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Setting up system call interface...");
    
    match context.boot_info {
        // x86_64 system calls (syscall/sysret or int 0x80)
        _ => {
            info!("System call interface setup complete");
        }
    }
    
    Ok(())
}

/// Initialize user memory management
fn init_user_memory(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing user memory management...");
    
    // Setup user space page tables
    // Initialize memory protection
    // Setup user space heap
    
    Ok(())
}

/// Create initial user processes
fn create_initial_processes(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Creating initial user processes...");
    
    // Create init process
    create_init_process(context)?;
    
    // Create daemon processes
    create_daemon_processes(context)?;
    
    Ok(())
}

/// Create init process
fn create_init_process(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Creating init process (PID 1)...");
    
    // In a real implementation, this would create the first user process
    // with proper memory layout, environment, and startup code
    
    Ok(())
}

/// Create daemon processes
fn create_daemon_processes(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Creating daemon processes...");
    
    // Create essential system daemons
    // - Device manager daemon
    // - File system daemon
    // - Network daemon
    // - Power management daemon
    
    Ok(())
}

/// Setup user space interfaces
fn setup_user_interfaces(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Setting up user space interfaces...");
    
    // Setup /dev interface
    // Setup /proc interface
    // Setup /sys interface
    
    Ok(())
}

/// Storage device types
#[derive(Debug, Clone, Copy)]
enum StorageDevice {
    Ata,
    Nvme,
    Scsi,
    Usb,
}

/// Detect storage devices
fn detect_storage_devices(context: &BootstrapContext) -> BootstrapResult<Vec<StorageDevice>> {
    let mut devices = Vec::new();
    
    // Scan for ATA/IDE devices
    devices.push(StorageDevice::Ata);
    
    // Scan for NVMe devices
    devices.push(StorageDevice::Nvme);
    
    // Scan for SCSI devices
    devices.push(StorageDevice::Scsi);
    
    Ok(devices)
}

/// Initialize ATA driver
fn init_ata_driver(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing ATA driver...");
    
    // Initialize ATA controller
    // Setup interrupt handlers
    // Detect attached devices
    
    Ok(())
}

/// Initialize NVMe driver
fn init_nvme_driver(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing NVMe driver...");
    
    // Initialize NVMe controller
    // Setup command queue
    // Detect attached devices
    
    Ok(())
}

/// Initialize SCSI driver
fn init_scsi_driver(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing SCSI driver...");
    
    // Initialize SCSI controller
    // Setup command queue
    // Detect attached devices
    
    Ok(())
}

/// Initialize USB storage driver
fn init_usb_storage_driver(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing USB storage driver...");
    
    // USB storage would be initialized through USB bus
    
    Ok(())
}

/// Initialize keyboard driver
fn init_keyboard_driver(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing keyboard driver...");
    
    // Initialize PS/2 keyboard or USB keyboard
    
    Ok(())
}

/// Initialize mouse driver
fn init_mouse_driver(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing mouse driver...");
    
    // Initialize PS/2 mouse or USB mouse
    
    Ok(())
}

/// Initialize framebuffer driver
fn init_framebuffer_driver(context: &BootstrapContext, fb: crate::FramebufferInfo) -> BootstrapResult<()> {
    info!("Initializing framebuffer driver for {}x{}x{} display", fb.width, fb.height, fb.bpp);
    
    // Initialize framebuffer access
    // Setup drawing functions
    // Clear screen and show boot logo
    
    Ok(())
}

/// Initialize PCI bus
fn init_pci_bus(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing PCI bus...");
    
    // Scan PCI configuration space
    // Initialize PCI devices
    // Setup PCI interrupt routing
    
    Ok(())
}

/// Initialize USB bus
fn init_usb_bus(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing USB bus...");
    
    // Initialize USB controllers
    // Setup USB device enumeration
    // Initialize USB classes
    
    Ok(())
}

/// Initialize ACPI
fn init_acpi(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing ACPI...");
    
    // Parse ACPI tables
    // Initialize power management
    // Setup thermal management
    
    Ok(())
}

/// Initialize process management
fn init_process_management(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing process management...");
    
    // Create process table
    // Initialize PID allocation
    // Setup process state management
    
    Ok(())
}

/// Initialize thread management
fn init_thread_management(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing thread management...");
    
    // Create thread table
    // Initialize thread ID allocation
    // Setup thread state management
    
    Ok(())
}

/// Initialize scheduling algorithms
fn init_scheduling_algorithms(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Initializing scheduling algorithms...");
    
    // Setup multi-level feedback queue
    // Initialize priority system
    // Setup CPU affinity
    
    Ok(())
}

/// Setup idle task
fn setup_idle_task(context: &BootstrapContext) -> BootstrapResult<()> {
    info!("Setting up idle task...");
    
    // Create CPU idle task for each CPU
    
    Ok(())
}