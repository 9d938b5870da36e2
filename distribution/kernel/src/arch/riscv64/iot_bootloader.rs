//! RISC-V IoT Bootloader
//! 
//! Minimal bootloader for RISC-V IoT devices optimized for low memory footprint,
//! fast boot times, and support for various IoT hardware configurations.

use crate::log::{info, warn, error, debug};
use crate::KernelError;

/// IoT device boot configuration
#[derive(Debug, Clone)]
pub struct IoTBootConfig {
    pub device_id: u32,
    pub flash_size_kb: u32,
    pub ram_size_kb: u32,
    pub boot_timeout_ms: u32,
    pub power_saving_enabled: bool,
    pub watchdog_enabled: bool,
    pub watchdog_timeout_ms: u32,
}

/// Bootloader memory layout for IoT devices
#[repr(C)]
pub struct IoTMemoryLayout {
    pub boot_rom_start: u32,
    pub bootloader_start: u32,
    pub bootloader_end: u32,
    pub kernel_start: u32,
    pub kernel_end: u32,
    pub config_start: u32,
    pub config_end: u32,
    pub user_data_start: u32,
    pub user_data_end: u32,
}

/// Bootloader state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BootState {
    ColdBoot = 0,
    WarmBoot = 1,
    Recovery = 2,
    Update = 3,
    Error = 4,
}

/// RISC-V IoT Bootloader
pub struct RiscVIoTBootloader {
    pub config: IoTBootConfig,
    pub memory_layout: IoTMemoryLayout,
    pub current_state: BootState,
    pub boot_count: u32,
    pub last_successful_boot: u64,
    pub watchdog_timer: Option<u32>,
}

impl RiscVIoTBootloader {
    pub fn new(config: IoTBootConfig) -> Self {
        let memory_layout = Self::calculate_memory_layout(&config);
        
        Self {
            config,
            memory_layout,
            current_state: BootState::ColdBoot,
            boot_count: 0,
            last_successful_boot: 0,
            watchdog_timer: None,
        }
    }
    
    /// Calculate memory layout based on device configuration
    fn calculate_memory_layout(config: &IoTBootConfig) -> IoTMemoryLayout {
        let flash_start = 0x0000_0000;
        let ram_start = 0x8000_0000;
        
        // Reserve first 64KB for bootloader
        let bootloader_start = flash_start;
        let bootloader_end = bootloader_start + 64 * 1024;
        
        // Reserve next 256KB for kernel
        let kernel_start = bootloader_end;
        let kernel_end = kernel_start + 256 * 1024;
        
        // Reserve 4KB for configuration
        let config_start = kernel_end;
        let config_end = config_start + 4 * 1024;
        
        // Use remaining flash for user data
        let user_data_start = config_end;
        let user_data_end = config.flash_size_kb as u32 * 1024;
        
        IoTMemoryLayout {
            boot_rom_start: flash_start,
            bootloader_start,
            bootloader_end,
            kernel_start,
            kernel_end,
            config_start,
            config_end,
            user_data_start,
            user_data_end,
        }
    }
    
    /// Initialize bootloader
    pub fn init(&mut self) -> Result<(), KernelError> {
        info!("Initializing RISC-V IoT bootloader...");
        
        // Initialize hardware
        self.init_hardware()?;
        
        // Load boot configuration
        self.load_boot_config()?;
        
        // Detect boot reason
        self.detect_boot_reason()?;
        
        // Initialize memory
        self.init_memory()?;
        
        // Set up watchdog if enabled
        if self.config.watchdog_enabled {
            self.init_watchdog()?;
        }
        
        self.boot_count = self.boot_count.wrapping_add(1);
        
        info!("RISC-V IoT bootloader initialized");
        info!("Boot configuration:");
        info!("  Device ID: {}", self.config.device_id);
        info!("  Flash size: {} KB", self.config.flash_size_kb);
        info!("  RAM size: {} KB", self.config.ram_size_kb);
        info!("  Current state: {:?}", self.current_state);
        
        Ok(())
    }
    
    /// Initialize hardware components
    fn init_hardware(&mut self) -> Result<(), KernelError> {
        info!("Initializing hardware...");
        
        // Initialize system clock
        self.init_system_clock()?;
        
        // Initialize GPIO pins
        self.init_gpio()?;
        
        // Initialize I2C/SPI interfaces
        self.init_interfaces()?;
        
        // Initialize power management
        if self.config.power_saving_enabled {
            self.init_power_management()?;
        }
        
        Ok(())
    }
    
    /// Initialize system clock
    fn init_system_clock(&self) -> Result<(), KernelError> {
        info!("Initializing system clock...");
        
        // Configure PLL for external crystal (typical 32.768kHz for IoT)
        // This would configure RISC-V clock control registers
        
        Ok(())
    }
    
    /// Initialize GPIO
    fn init_gpio(&self) -> Result<(), KernelError> {
        info!("Initializing GPIO...");
        
        // Configure GPIO pins for IoT devices
        // Enable pull-up resistors, set directions, etc.
        
        Ok(())
    }
    
    /// Initialize communication interfaces
    fn init_interfaces(&self) -> Result<(), KernelError> {
        info!("Initializing communication interfaces...");
        
        // Initialize I2C, SPI, UART for sensor communication
        
        Ok(())
    }
    
    /// Initialize power management
    fn init_power_management(&self) -> Result<(), KernelError> {
        info!("Initializing power management...");
        
        // Configure power management unit for low-power operation
        // Enable sleep modes, configure wake-up sources
        
        Ok(())
    }
    
    /// Load boot configuration from persistent storage
    fn load_boot_config(&mut self) -> Result<(), KernelError> {
        info!("Loading boot configuration...");
        
        // Read configuration from flash memory
        // This would load device configuration, network settings, etc.
        
        Ok(())
    }
    
    /// Detect boot reason and set appropriate state
    fn detect_boot_reason(&mut self) -> Result<(), KernelError> {
        info!("Detecting boot reason...");
        
        // Read boot cause register to determine why we booted
        // Could be power-on, watchdog reset, wake from sleep, etc.
        
        self.current_state = BootState::ColdBoot; // Default for now
        
        Ok(())
    }
    
    /// Initialize memory subsystem
    fn init_memory(&self) -> Result<(), KernelError> {
        info!("Initializing memory subsystem...");
        
        // Initialize RAM
        self.init_ram()?;
        
        // Initialize flash memory interface
        self.init_flash()?;
        
        Ok(())
    }
    
    /// Initialize RAM
    fn init_ram(&self) -> Result<(), KernelError> {
        info!("Initializing {} KB RAM", self.config.ram_size_kb);
        
        // Zero out RAM for clean startup
        let ram_end = self.config.ram_size_kb as usize * 1024;
        unsafe {
            core::ptr::write_bytes(0x8000_0000 as *mut u8, 0, ram_end);
        }
        
        Ok(())
    }
    
    /// Initialize flash memory interface
    fn init_flash(&self) -> Result<(), KernelError> {
        info!("Initializing {} KB flash", self.config.flash_size_kb);
        
        // Initialize flash controller
        // Set up read parameters, enable caching if available
        
        Ok(())
    }
    
    /// Initialize watchdog timer
    fn init_watchdog(&mut self) -> Result<(), KernelError> {
        info!("Initializing watchdog timer ({} ms timeout)", self.config.watchdog_timeout_ms);
        
        self.watchdog_timer = Some(self.config.watchdog_timeout_ms);
        
        // Configure watchdog hardware
        
        Ok(())
    }
    
    /// Main boot sequence
    pub fn boot(&mut self) -> Result<(), KernelError> {
        info!("Starting RISC-V IoT boot sequence...");
        
        let start_time = crate::arch::riscv64::registers::get_time();
        
        // Execute boot stages
        self.boot_stage_1()?;
        self.boot_stage_2()?;
        self.boot_stage_3()?;
        
        let boot_time = crate::arch::riscv64::registers::get_time() - start_time;
        info!("Boot completed in {} cycles", boot_time);
        
        // Update successful boot timestamp
        self.last_successful_boot = crate::arch::riscv64::registers::get_time();
        
        Ok(())
    }
    
    /// Boot stage 1: Hardware initialization
    fn boot_stage_1(&mut self) -> Result<(), KernelError> {
        debug!("Boot stage 1: Hardware initialization");
        
        // Check hardware integrity
        self.check_hardware()?;
        
        // Initialize critical peripherals
        self.init_critical_peripherals()?;
        
        Ok(())
    }
    
    /// Boot stage 2: Memory and storage
    fn boot_stage_2(&mut self) -> Result<(), KernelError> {
        debug!("Boot stage 2: Memory and storage");
        
        // Verify memory integrity
        self.verify_memory()?;
        
        // Load kernel from flash
        self.load_kernel()?;
        
        // Set up memory protection
        self.setup_memory_protection()?;
        
        Ok(())
    }
    
    /// Boot stage 3: Final initialization and kernel launch
    fn boot_stage_3(&mut self) -> Result<(), KernelError> {
        debug!("Boot stage 3: Final initialization and kernel launch");
        
        // Verify kernel integrity
        self.verify_kernel()?;
        
        // Prepare environment for kernel
        self.prepare_kernel_environment()?;
        
        // Launch kernel
        self.launch_kernel()?;
        
        Ok(())
    }
    
    /// Check hardware integrity
    fn check_hardware(&self) -> Result<(), KernelError> {
        debug!("Checking hardware integrity...");
        
        // Check RAM integrity
        self.check_ram_integrity()?;
        
        // Check flash integrity
        self.check_flash_integrity()?;
        
        // Check critical peripherals
        self.check_peripherals()?;
        
        Ok(())
    }
    
    /// Check RAM integrity
    fn check_ram_integrity(&self) -> Result<(), KernelError> {
        debug!("Checking RAM integrity...");
        
        // Simple memory test
        let test_addr = 0x8000_0000;
        unsafe {
            core::ptr::write_volatile(test_addr as *mut u32, 0xAAAA_5555);
            let read_val = core::ptr::read_volatile(test_addr as *const u32);
            if read_val != 0xAAAA_5555 {
                return Err(KernelError::MemoryTestFailed);
            }
        }
        
        Ok(())
    }
    
    /// Check flash integrity
    fn check_flash_integrity(&self) -> Result<(), KernelError> {
        debug!("Checking flash integrity...");
        
        // Check flash magic numbers, checksums, etc.
        
        Ok(())
    }
    
    /// Check peripherals
    fn check_peripherals(&self) -> Result<(), KernelError> {
        debug!("Checking peripherals...");
        
        // Check if essential peripherals respond
        
        Ok(())
    }
    
    /// Initialize critical peripherals
    fn init_critical_peripherals(&self) -> Result<(), KernelError> {
        debug!("Initializing critical peripherals...");
        
        // Initialize timers
        self.init_timers()?;
        
        // Initialize interrupt controller
        self.init_interrupt_controller()?;
        
        Ok(())
    }
    
    /// Initialize timers
    fn init_timers(&self) -> Result<(), KernelError> {
        debug!("Initializing timers...");
        
        // Initialize system timer for scheduling
        
        Ok(())
    }
    
    /// Initialize interrupt controller
    fn init_interrupt_controller(&self) -> Result<(), KernelError> {
        debug!("Initializing interrupt controller...");
        
        // Initialize PLIC (Platform Level Interrupt Controller)
        
        Ok(())
    }
    
    /// Verify memory
    fn verify_memory(&self) -> Result<(), KernelError> {
        debug!("Verifying memory...");
        
        // Memory tests and validation
        
        Ok(())
    }
    
    /// Load kernel from flash
    fn load_kernel(&mut self) -> Result<(), KernelError> {
        debug!("Loading kernel from flash...");
        
        // Copy kernel from flash to RAM
        let kernel_size = self.memory_layout.kernel_end - self.memory_layout.kernel_start;
        
        unsafe {
            core::ptr::copy_nonoverlapping(
                self.memory_layout.kernel_start as *const u8,
                self.memory_layout.kernel_start as *mut u8,
                kernel_size as usize,
            );
        }
        
        info!("Kernel loaded: {} bytes", kernel_size);
        
        Ok(())
    }
    
    /// Set up memory protection
    fn setup_memory_protection(&self) -> Result<(), KernelError> {
        debug!("Setting up memory protection...");
        
        // Configure PMP (Physical Memory Protection) for RISC-V
        // This provides memory isolation for security
        
        Ok(())
    }
    
    /// Verify kernel integrity
    fn verify_kernel(&self) -> Result<(), KernelError> {
        debug!("Verifying kernel integrity...");
        
        // Check kernel magic number, checksums, etc.
        // This ensures kernel hasn't been corrupted
        
        Ok(())
    }
    
    /// Prepare environment for kernel
    fn prepare_kernel_environment(&self) -> Result<(), KernelError> {
        debug!("Preparing kernel environment...");
        
        // Set up kernel stack
        self.setup_kernel_stack()?;
        
        // Configure kernel entry point
        self.setup_kernel_entry()?;
        
        // Disable bootloader-specific features
        self.disable_bootloader_features()?;
        
        Ok(())
    }
    
    /// Set up kernel stack
    fn setup_kernel_stack(&self) -> Result<(), KernelError> {
        debug!("Setting up kernel stack...");
        
        // Allocate stack space for kernel
        
        Ok(())
    }
    
    /// Set up kernel entry point
    fn setup_kernel_entry(&self) -> Result<(), KernelError> {
        debug!("Setting up kernel entry point...");
        
        // Configure kernel entry address
        
        Ok(())
    }
    
    /// Disable bootloader-specific features
    fn disable_bootloader_features(&self) -> Result<(), KernelError> {
        debug!("Disabling bootloader features...");
        
        // Disable boot-time only features
        
        Ok(())
    }
    
    /// Launch kernel
    fn launch_kernel(&self) -> Result<(), KernelError> {
        debug!("Launching kernel...");
        
        info!("Jumping to kernel at {:#x}", self.memory_layout.kernel_start);
        
        // Transfer control to kernel
        unsafe {
            let kernel_entry: fn() = core::mem::transmute(self.memory_layout.kernel_start);
            kernel_entry();
        }
        
        // This should not return
        Err(KernelError::BootFailed)
    }
    
    /// Handle watchdog reset
    pub fn handle_watchdog_reset(&mut self) {
        warn!("Watchdog reset triggered!");
        
        self.current_state = BootState::Recovery;
        
        // Perform recovery actions
        let _ = self.recovery_boot();
    }
    
    /// Recovery boot sequence
    fn recovery_boot(&mut self) -> Result<(), KernelError> {
        info!("Starting recovery boot sequence...");
        
        // Use minimal configuration
        self.current_state = BootState::Recovery;
        
        // Skip non-essential initialization
        
        Ok(())
    }
    
    /// Handle over-the-air update
    pub fn handle_ota_update(&mut self) -> Result<(), KernelError> {
        info!("Starting OTA update...");
        
        self.current_state = BootState::Update;
        
        // Switch to update partition
        // Validate update image
        // Flash new kernel
        // Reboot
        
        Ok(())
    }
    
    /// Update watchdog timer
    pub fn kick_watchdog(&mut self) {
        if let Some(timeout) = self.watchdog_timer {
            self.watchdog_timer = Some(timeout);
            // Reset watchdog counter in hardware
        }
    }
    
    /// Get boot statistics
    pub fn get_boot_stats(&self) -> BootStats {
        BootStats {
            boot_count: self.boot_count,
            current_state: self.current_state,
            last_successful_boot: self.last_successful_boot,
            flash_size_kb: self.config.flash_size_kb,
            ram_size_kb: self.config.ram_size_kb,
        }
    }
}

/// Boot statistics
#[derive(Debug, Clone)]
pub struct BootStats {
    pub boot_count: u32,
    pub current_state: BootState,
    pub last_successful_boot: u64,
    pub flash_size_kb: u32,
    pub ram_size_kb: u32,
}

/// Create IoT bootloader for common device configurations
pub fn create_iot_bootloader(device_type: &str) -> Result<RiscVIoTBootloader, KernelError> {
    let config = match device_type {
        "esp32" => IoTBootConfig {
            device_id: 0x1001,
            flash_size_kb: 4096,
            ram_size_kb: 520,
            boot_timeout_ms: 5000,
            power_saving_enabled: true,
            watchdog_enabled: true,
            watchdog_timeout_ms: 8000,
        },
        "riscv_e310" => IoTBootConfig {
            device_id: 0x2001,
            flash_size_kb: 2048,
            ram_size_kb: 256,
            boot_timeout_ms: 3000,
            power_saving_enabled: true,
            watchdog_enabled: true,
            watchdog_timeout_ms: 5000,
        },
        "k210" => IoTBootConfig {
            device_id: 0x3001,
            flash_size_kb: 8192,
            ram_size_kb: 1024,
            boot_timeout_ms: 5000,
            power_saving_enabled: false,
            watchdog_enabled: true,
            watchdog_timeout_ms: 10000,
        },
        _ => return Err(KernelError::InvalidArgument),
    };
    
    Ok(RiscVIoTBootloader::new(config))
}