//! UEFI Boot Support
//! 
//! This module provides comprehensive UEFI boot capabilities for MultiOS,
//! supporting UEFI firmware across x86_64, ARM64, and RISC-V architectures.

use crate::{BootError, Architecture, HardwareInfo, MemoryMap, MemoryRegion, MemoryType};
use log::{info, debug, warn, error};

/// UEFI boot manager
pub struct UEFIBootManager {
    system_table: *mut UEFISystemTable,
    boot_services: *mut UEFIBootServices,
    runtime_services: *mut UEFIRuntimeServices,
    config_table: *const UEFIConfigTable,
    arch: Architecture,
    initialized: bool,
}

/// UEFI System Table
#[repr(C)]
pub struct UEFISystemTable {
    pub signature: u64,
    pub revision: u32,
    pub header_size: u32,
    pub crc32: u32,
    pub reserved: u32,
    pub firmware_vendor: *const u16,
    pub firmware_revision: u32,
    pub console_in_handle: u64,
    pub con_in: *const UEFISimpleTextInputProtocol,
    pub console_out_handle: u64,
    pub con_out: *const UEFISimpleTextOutputProtocol,
    pub standard_error_handle: u64,
    pub std_err: *const UEFISimpleTextOutputProtocol,
    pub runtime_services: *const UEFIRuntimeServices,
    pub boot_services: *const UEFIBootServices,
    pub number_of_table_entries: usize,
    pub configuration_table: *const UEFIConfigTable,
}

/// UEFI Boot Services
#[repr(C)]
pub struct UEFIBootServices {
    pub table_header: UEFITableHeader,
    pub raise_tpl: UEFIRaiseTPL,
    pub restore_tpl: UEFIRestoreTPL,
    pub allocate_pages: UEFIAllocatePages,
    pub free_pages: UEFFreePages,
    pub get_memory_map: UEFIGetMemoryMap,
    pub allocate_pool: UEFIAllocatePool,
    pub free_pool: UEFFreePool,
    pub create_event: UEFICreateEvent,
    pub close_event: UEFFICloseEvent,
    pub check_event: UEFICheckEvent,
    pub signal_event: UEFISignalEvent,
    pub wait_for_event: UEFIWaitForEvent,
    pub reboot: UEFIReboot,
    pub set_watchdog_timer: UEFISetWatchdogTimer,
    pub connect_controller: EFIConnectController,
    pub disconnect_controller: EFIDisconnectController,
    pub handle_protocol: EFIHandleProtocol,
    pub p_handle_protocol: EFIPHandleProtocol,
    pub register_protocol_notify: EFIRegisterProtocolNotify,
    pub locate_handle: EFI LocateHandle,
    pub locate_device_path: EFI LocateDevicePath,
    pub install_configuration_table: EFIInstallConfigurationTable,
    pub load_image: EFI LoadImage,
    pub start_image: EFI StartImage,
    pub exit: EFI Exit,
    pub unload_image: EFIUnloadImage,
    pub exit_boot_services: EFIExitBootServices,
    pub get_next_monotonic_count: EFIGetNextMonotonicCount,
    pub stall: EFIStall,
    pub set_watchdog_timer_ext: EFISetWatchdogTimerExt,
    pub get_next_high_monotonic_count: EFIGetNextHighMonotonicCount,
    pub reset_system: EFIResetSystem,
    pub set_virtual_address_map: EFISetVirtualAddressMap,
    pub relocate: EFIRelocate,
    pub set_memory_attributes: EFISetMemoryAttributes,
}

/// UEFI Runtime Services
#[repr(C)]
pub struct UEFIRuntimeServices {
    pub table_header: UEFITableHeader,
    pub get_time: EFIGetTime,
    pub set_time: EFISetTime,
    pub get_wakeup_time: EFIGetWakeupTime,
    pub set_wakeup_time: EFISetWakeupTime,
    pub set_virtual_address_map: EFISetVirtualAddressMapExt,
    pub convert_pointer: EFIConvertPointer,
    pub get_variable: EFIGetVariable,
    pub get_next_variable_name: EFIGetNextVariableName,
    pub set_variable: EFISetVariable,
    pub get_next_high_monotonic_count: EFIGetNextHighMonotonicCount,
    pub reset_system: EFIResetSystemExt,
}

/// UEFI Configuration Table
#[repr(C)]
pub struct UEFIConfigTable {
    pub vendor_guid: UEFIGuid,
    pub vendor_table: *const u8,
}

/// UEFI GUID structure
#[repr(C)]
#[derive(Clone, Copy)]
pub struct UEFIGuid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// UEFI Table Header
#[repr(C)]
pub struct UEFITableHeader {
    pub signature: u64,
    pub revision: u32,
    pub header_size: u32,
    pub crc32: u32,
    pub reserved: u32,
}

/// UEFI Simple Text Input Protocol
#[repr(C)]
pub struct UEFISimpleTextInputProtocol {
    pub reset: EFIInputReset,
    pub read_key_stroke: EFIReadKeyStroke,
    pub wait_for_event: WaitForEventExt,
}

/// UEFI Simple Text Output Protocol
#[repr(C)]
pub struct UEFISimpleTextOutputProtocol {
    pub reset: EFIOutputReset,
    pub output_string: EFIOutputString,
    pub test_string: EFI TestString,
    pub clear_screen: EFIClearScreen,
    pub set_cursor_position: EFISetCursorPosition,
    pub enable_cursor: EFIEnableCursor,
    pub mode: *const UEFISimpleTextOutputMode,
}

/// UEFI Simple Text Output Mode
#[repr(C)]
pub struct UEFISimpleTextOutputMode {
    pub max_mode: i32,
    pub mode: i32,
    pub attribute: i32,
    pub cursor_column: i32,
    pub cursor_row: i32,
    pub cursor_visible: bool,
}

// Type definitions for function pointers (simplified)
type UEFIAllocatePages = extern "C" fn(AllocateType, MemoryType, usize, *mut u64) -> u32;
type UEFFreePages = extern "C" fn(u64, usize) -> u32;
type UEFIGetMemoryMap = extern "C" fn(*mut usize, *mut UEFIMemoryDescriptor, *mut u64, *mut usize, *mut u32) -> u32;
type UEFIAllocatePool = extern "C" fn(PoolType, usize, *mut *mut u8) -> u32;
type UEFFreePool = extern "C" fn(*mut u8) -> u32;
type UEFIOutputString = extern "C" fn(*const UEFISimpleTextOutputProtocol, *const u16) -> u32;
type EFIResetSystem = extern "C" fn(u32, u32, usize, *const u8) -> !;
type EFIGetTime = extern "C" fn(*mut UEFITime, *mut UEFICapsule) -> u32;
type EFIExitBootServices = extern "C" fn(u64, usize) -> u32;

/// UEFI Memory Descriptor
#[repr(C)]
pub struct UEFIMemoryDescriptor {
    pub type_: MemoryType,
    pub physical_start: u64,
    pub virtual_start: u64,
    pub number_of_pages: u64,
    pub attribute: u64,
}

/// UEFI Time structure
#[repr(C)]
pub struct UEFITime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub pad1: u8,
    pub nanosecond: u32,
    pub time_zone: i16,
    pub daylight: u8,
    pub pad2: u8,
}

/// UEFI Capsule structure
#[repr(C)]
pub struct UEFICapsule {
    pub capsule_header: UEFICapsuleHeader,
    pub flags: u32,
    pub image_size: u32,
}

/// UEFI Capsule Header
#[repr(C)]
pub struct UEFICapsuleHeader {
    pub capsule_guid: UEFIGuid,
    pub header_size: u32,
    pub flags: u32,
    pub capsule_image_size: u32,
}

/// UEFI Memory Type
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u32)]
pub enum MemoryType {
    ReservedMemoryType = 0,
    LoaderCode = 1,
    LoaderData = 2,
    BootServicesCode = 3,
    BootServicesData = 4,
    RuntimeServicesCode = 5,
    RuntimeServicesData = 6,
    ConventionalMemory = 7,
    UnusableMemory = 8,
    ACPIReclaimMemory = 9,
    ACPIMemoryNVS = 10,
    MemoryMappedIO = 11,
    MemoryMappedIOPortSpace = 12,
    PalCode = 13,
    PersistentMemory = 14,
    MaxMemoryType = 15,
}

/// UEFI Allocate Type
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u32)]
pub enum AllocateType {
    AllocateAnyPages,
    AllocateMaxAddress,
    AllocateAddress,
    MaxAllocateType,
}

/// UEFI Pool Type
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u32)]
pub enum PoolType {
    EfiBootServicesData,
    EfiRuntimeServicesData,
    EfiBootServicesCode,
    EfiRuntimeServicesCode,
    EfiReservedMemoryType,
    EfiUnusableMemory,
    EfiACPIReclaimMemory,
    EfiACPIMemoryNVS,
    EfiMemoryMappedIO,
    EfiMemoryMappedIOPortSpace,
    EfiPalCode,
    EfiPersistentMemory,
    EfiMaxMemoryType,
}

// Additional function pointer types (simplified)
type UEFIRaiseTPL = extern "C" fn(u8) -> u8;
type UEFIRestoreTPL = extern "C" fn(u8);
type UEFICreateEvent = extern "C" fn(u32, u64, *const (), *const (), *mut *mut ()) -> u32;
type UEFFICloseEvent = extern "C" fn(*mut ()) -> u32;
type UEFICheckEvent = extern "C" fn(*const ()) -> u32;
type UEFISignalEvent = extern "C" fn(*const ()) -> u32;
type UEFIWaitForEvent = extern "C" fn(u32, *const *const (), *mut usize) -> u32;
type UEFIReboot = extern "C" fn(u32, u32) -> !;
type UEFISetWatchdogTimer = extern "C" fn(u64, u64, u64, *const u16) -> u32;
type EFIInputReset = extern "C" fn(*const UEFISimpleTextInputProtocol, bool) -> u32;
type EFIReadKeyStroke = extern "C" fn(*const UEFISimpleTextInputProtocol, *mut UEFIInputKey) -> u32;
type WaitForEventExt = extern "C" fn(u32, *const *const (), *mut usize) -> u32;
type EFIOutputReset = extern "C" fn(*const UEFISimpleTextOutputProtocol, bool) -> u32;
type EFI TestString = extern "C" fn(*const UEFISimpleTextOutputProtocol, *const u16) -> u32;
type EFIClearScreen = extern "C" fn(*const UEFISimpleTextOutputProtocol) -> u32;
type EFISetCursorPosition = extern "C" fn(*const UEFISimpleTextOutputProtocol, u32, u32) -> u32;
type EFIEnableCursor = extern "C" fn(*const UEFISimpleTextOutputProtocol, bool) -> u32;

type EFIConnectController = extern "C" fn(u64, *const *const (), *const u16, bool) -> u32;
type EFIDisconnectController = extern "C" fn(u64, *const (), *const (), bool) -> u32;
type EFIHandleProtocol = extern "C" fn(u64, *const UEFIGuid, *mut *mut ()) -> u32;
type EFIPHandleProtocol = extern "C" fn(*mut *mut u8, *const UEFIGuid, *mut *mut ()) -> u32;
type EFIRegisterProtocolNotify = extern "C" fn(*const UEFIGuid, *const (), *mut *mut ()) -> u32;
type EFI LocateHandle = extern "C" fn(u32, *const UEFIGuid, *const (), usize, *mut u8) -> u32;
type EFI LocateDevicePath = extern "C" fn(*const UEFIGuid, *mut *mut UEFIDevicePathProtocol, *mut u64) -> u32;
type EFIInstallConfigurationTable = extern "C" fn(*const UEFIGuid, *const ()) -> u32;
type EFI LoadImage = extern "C" fn(bool, u64, *const UEFIGuid, *mut *mut u8, usize, *mut u64) -> u32;
type EFI StartImage = extern "C" fn(u64, *mut usize, *mut *mut u16) -> u32;
type EFI Exit = extern "C" fn(u64, u32, usize, *const u16) -> !;
type EFIUnloadImage = extern "C" fn(u64) -> u32;
type EFIExitBootServices = extern "C" fn(u64, usize) -> u32;
type EFIGetNextMonotonicCount = extern "C" fn(*mut u64) -> u32;
type EFIStall = extern "C" fn(u32) -> u32;
type EFISetWatchdogTimerExt = extern "C" fn(u64, u64, u64, *const u16) -> u32;
type EFIGetNextHighMonotonicCount = extern "C" fn(*mut u32) -> u32;
type EFIResetSystemExt = extern "C" fn(u32, u32, usize, *const u8) -> !;
type EFISetVirtualAddressMapExt = extern "C" fn(usize, usize, u32, *const u8, *const u8) -> u32;
type EFIConvertPointer = extern "C" fn(u32, *mut *const ()) -> u32;
type EFIGetVariable = extern "C" fn(*const u16, *const UEFIGuid, *mut u32, *mut usize, *mut u8) -> u32;
type EFIGetNextVariableName = extern "C" fn(*mut usize, *mut u16, *mut UEFIGuid) -> u32;
type EFISetVariable = extern "C" fn(*const u16, *const UEFIGuid, u32, usize, *const u8) -> u32;
type EFISetVirtualAddressMapExt2 = extern "C" fn(usize, usize, u32, *const u8, *const u8, *mut u32) -> u32;
type EFIConvertPointerExt = extern "C" fn(u32, *mut *const (), *mut u32) -> u32;
type EFIResetSystemExt2 = extern "C" fn(u32, u32, usize, *const u8, *mut u32) -> !;
type EFIGetVariableExt = extern "C" fn(*const u16, *const UEFIGuid, *mut u32, *mut usize, *mut u8, *mut u32) -> u32;
type EFIGetNextVariableNameExt = extern "C" fn(*mut usize, *mut u16, *mut UEFIGuid, *mut u32) -> u32;
type EFISetVariableExt = extern "C" fn(*const u16, *const UEFIGuid, u32, usize, *const u8, *mut u32) -> u32;

/// UEFI Input Key structure
#[repr(C)]
pub struct UEFIInputKey {
    pub scan_code: u16,
    pub unicode_char: u16,
}

/// UEFI Device Path Protocol
#[repr(C)]
pub struct UEFIDevicePathProtocol {
    pub type_: u8,
    pub sub_type: u8,
    pub length: [u8; 2],
}

/// UEFI boot options
#[derive(Debug, Clone)]
pub struct UEFIBootOptions {
    pub boot_timeout: u64,
    pub console_device: u64,
    pub load_options: String,
    pub acpi_table_address: u64,
    pub smbios_table_address: u64,
    pub network_boot: bool,
}

impl Default for UEFIBootOptions {
    fn default() -> Self {
        Self {
            boot_timeout: 5_000_000, // 5 seconds in microseconds
            console_device: 0,
            load_options: String::new(),
            acpi_table_address: 0,
            smbios_table_address: 0,
            network_boot: false,
        }
    }
}

impl UEFIBootManager {
    /// Create new UEFI boot manager
    pub fn new(system_table: *mut UEFISystemTable, arch: Architecture) -> Self {
        Self {
            system_table,
            boot_services: core::ptr::null_mut(),
            runtime_services: core::ptr::null_mut(),
            config_table: core::ptr::null(),
            arch,
            initialized: false,
        }
    }

    /// Initialize UEFI boot manager
    pub fn init(&mut self) -> Result<(), BootError> {
        info!("Initializing UEFI boot manager for {:?}", self.arch);
        
        if self.system_table.is_null() {
            return Err(BootError::UEFIFailed);
        }
        
        // Initialize UEFI subsystems
        self.init_services()?;
        self.init_console()?;
        self.init_memory_management()?;
        self.init_events()?;
        self.init_protocols()?;
        
        self.initialized = true;
        info!("UEFI boot manager initialized successfully");
        Ok(())
    }

    /// Initialize UEFI services
    fn init_services(&mut self) -> Result<(), BootError> {
        debug!("Initializing UEFI services...");
        
        // Get boot and runtime services
        unsafe {
            let table = &*self.system_table;
            self.boot_services = table.boot_services as *mut UEFIBootServices;
            self.runtime_services = table.runtime_services as *mut UEFIRuntimeServices;
            self.config_table = table.configuration_table;
        }
        
        if self.boot_services.is_null() {
            return Err(BootError::UEFIFailed);
        }
        
        Ok(())
    }

    /// Initialize console
    fn init_console(&mut self) -> Result<(), BootError> {
        debug!("Initializing UEFI console...");
        
        unsafe {
            let table = &*self.system_table;
            
            if !table.con_in.is_null() {
                // Initialize text input
                debug!("Initializing text input protocol");
            }
            
            if !table.con_out.is_null() {
                // Initialize text output
                debug!("Initializing text output protocol");
                
                // Print welcome message
                let msg = "MultiOS UEFI Boot Manager\n";
                let msg_ptr = msg.as_ptr() as *const u16;
                if !((*self.boot_services).output_string)(table.con_out, msg_ptr) == 0 {
                    warn!("Failed to print welcome message");
                }
            }
        }
        
        Ok(())
    }

    /// Initialize memory management
    fn init_memory_management(&mut self) -> Result<(), BootError> {
        debug!("Initializing UEFI memory management...");
        
        let memory_map_size = 1024;
        let mut memory_map_buffer = vec![0u8; memory_map_size];
        let mut map_key = 0usize;
        let mut descriptor_size = 0usize;
        let mut descriptor_version = 0u32;
        
        unsafe {
            let status = ((*self.boot_services).get_memory_map)(
                &mut memory_map_size,
                memory_map_buffer.as_mut_ptr() as *mut UEFIMemoryDescriptor,
                &mut map_key,
                &mut descriptor_size,
                &mut descriptor_version,
            );
            
            if status != 0 {
                warn!("Failed to get memory map: status = {}", status);
            }
        }
        
        Ok(())
    }

    /// Initialize events
    fn init_events(&mut self) -> Result<(), BootError> {
        debug!("Initializing UEFI events...");
        
        // Initialize timer events, keyboard events, etc.
        Ok(())
    }

    /// Initialize protocols
    fn init_protocols(&mut self) -> Result<(), BootError> {
        debug!("Initializing UEFI protocols...");
        
        // Load and initialize necessary protocols
        Ok(())
    }

    /// Execute boot sequence
    pub fn boot(&mut self, options: &UEFIBootOptions) -> Result<(), BootError> {
        if !self.initialized {
            return Err(BootError::UEFIFailed);
        }
        
        info!("Starting UEFI boot sequence...");
        
        // Step 1: Load boot loader
        self.load_bootloader(options)?;
        
        // Step 2: Prepare boot environment
        self.prepare_boot_environment(options)?;
        
        // Step 3: Exit boot services
        self.exit_boot_services()?;
        
        // Step 4: Transfer control
        self.transfer_control()?;
        
        Ok(())
    }

    /// Load boot loader
    fn load_bootloader(&mut self, _options: &UEFIBootOptions) -> Result<(), BootError> {
        debug!("Loading boot loader...");
        
        // Find and load the boot loader image
        Ok(())
    }

    /// Prepare boot environment
    fn prepare_boot_environment(&mut self, options: &UEFIBootOptions) -> Result<(), BootError> {
        debug!("Preparing boot environment...");
        
        // Set up ACPI tables, SMBIOS, etc.
        if options.acpi_table_address != 0 {
            debug!("ACPI table at address: {:#x}", options.acpi_table_address);
        }
        
        if options.smbios_table_address != 0 {
            debug!("SMBIOS table at address: {:#x}", options.smbios_table_address);
        }
        
        Ok(())
    }

    /// Exit boot services
    fn exit_boot_services(&mut self) -> Result<(), BootError> {
        debug!("Exiting boot services...");
        
        let map_key = 0usize; // Get current map key
        
        unsafe {
            let status = ((*self.boot_services).exit_boot_services)(0, map_key);
            if status != 0 {
                warn!("Failed to exit boot services: status = {}", status);
            }
        }
        
        Ok(())
    }

    /// Transfer control to OS
    fn transfer_control(&mut self) -> Result<(), BootError> {
        debug!("Transferring control to OS...");
        
        // This is typically done by the boot loader itself
        Ok(())
    }

    /// Get memory map from UEFI
    pub fn get_memory_map(&self) -> Result<MemoryMap, BootError> {
        if self.boot_services.is_null() {
            return Err(BootError::UEFIFailed);
        }
        
        let mut memory_map_buffer = vec![0u8; 4096];
        let mut map_key = 0usize;
        let mut descriptor_size = 0usize;
        let mut descriptor_version = 0u32;
        
        unsafe {
            let status = ((*self.boot_services).get_memory_map)(
                &mut memory_map_buffer.len(),
                memory_map_buffer.as_mut_ptr() as *mut UEFIMemoryDescriptor,
                &mut map_key,
                &mut descriptor_size,
                &mut descriptor_version,
            );
            
            if status != 0 {
                return Err(BootError::UEFIFailed);
            }
        }
        
        // Convert UEFI memory map to our format
        self.convert_uefi_memory_map(&memory_map_buffer, descriptor_size)
    }

    /// Convert UEFI memory map to our format
    fn convert_uefi_memory_map(&self, buffer: &[u8], descriptor_size: usize) -> Result<MemoryMap, BootError> {
        let mut regions = Vec::new();
        let descriptor_count = buffer.len() / descriptor_size;
        
        for i in 0..descriptor_count {
            let offset = i * descriptor_size;
            let descriptor = unsafe {
                &*(buffer.as_ptr().add(offset) as *const UEFIMemoryDescriptor)
            };
            
            let mem_type = match descriptor.type_ {
                MemoryType::LoaderCode => MemoryType::Usable,
                MemoryType::LoaderData => MemoryType::Usable,
                MemoryType::BootServicesCode => MemoryType::Usable,
                MemoryType::BootServicesData => MemoryType::Usable,
                MemoryType::ConventionalMemory => MemoryType::Usable,
                MemoryType::ACPIReclaimMemory => MemoryType::ACPIReclaimable,
                MemoryType::ACPIMemoryNVS => MemoryType::ACPINVS,
                MemoryType::UnusableMemory => MemoryType::BadMemory,
                MemoryType::ReservedMemoryType => MemoryType::Reserved,
                _ => MemoryType::Reserved,
            };
            
            regions.push(MemoryRegion {
                start: descriptor.physical_start,
                size: descriptor.number_of_pages * 4096,
                region_type: mem_type,
            });
        }
        
        Ok(MemoryMap { regions })
    }

    /// Print to UEFI console
    pub fn print(&self, message: &str) -> Result<(), BootError> {
        if self.system_table.is_null() || self.boot_services.is_null() {
            return Err(BootError::UEFIFailed);
        }
        
        unsafe {
            let table = &*self.system_table;
            if !table.con_out.is_null() {
                let msg = format!("{}\n", message);
                let msg_ptr = msg.as_ptr() as *const u16;
                ((*self.boot_services).output_string)(table.con_out, msg_ptr);
            }
        }
        
        Ok(())
    }

    /// Check if initialized
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get architecture
    pub const fn architecture(&self) -> Architecture {
        self.arch
    }
}