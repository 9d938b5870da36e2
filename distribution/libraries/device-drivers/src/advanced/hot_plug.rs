//! Hot-Plug Support Module
//! 
//! Provides comprehensive hot-plug device detection, notification, and management
//! capabilities for dynamic device insertion and removal.

use crate::AdvancedDriverId;
use crate::AdvancedDriverError::{self, *};
use crate::DeviceType;
use crate::DeviceCapabilities;
use alloc::collections::BTreeMap;
use log::{debug, warn, info, error};

/// Hot-plug event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotPlugEventType {
    DeviceInserted,
    DeviceRemoved,
    DeviceChanged,
    DeviceReady,
    DeviceError,
    DeviceTimeout,
}

/// Hot-plug event
#[derive(Debug, Clone)]
pub struct HotPlugEvent {
    pub event_type: HotPlugEventType,
    pub device_id: u32,
    pub device_type: DeviceType,
    pub bus_type: BusType,
    pub port: Option<u8>,
    pub timestamp: u64,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
    pub description: Option<String>,
}

/// Hardware bus types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusType {
    USB,
    PCI,
    PCMCIA,
    ExpressCard,
    Thunderbolt,
    FireWire,
    Serial,
    Parallel,
    Other,
}

/// Device notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Silent,     // No notifications
    Info,       // Information only
    Warning,    // Warnings and info
    Error,      // Errors, warnings, and info
    Debug,      // All events including debug
}

/// Device notification
#[derive(Debug, Clone)]
pub struct DeviceNotification {
    pub event: HotPlugEvent,
    pub notification_level: NotificationLevel,
    pub user_message: Option<String>,
}

/// Hot-plug device information
#[derive(Debug, Clone)]
pub struct HotPlugDevice {
    pub device_id: u32,
    pub device_type: DeviceType,
    pub bus_type: BusType,
    pub is_present: bool,
    pub last_seen_timestamp: u64,
    pub insertion_count: u32,
    pub removal_count: u32,
    pub error_count: u32,
    pub timeout_count: u32,
    pub hot_plug_capable: bool,
}

/// Advanced device detection strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStrategy {
    Polling,        // Periodic polling of bus
    Interrupt,      // Interrupt-driven detection
    EventDriven,    // Event-based detection
    Async,          // Asynchronous detection
}

/// Bus-specific detection capabilities
#[derive(Debug, Clone)]
pub struct BusDetectionCapabilities {
    pub bus_type: BusType,
    pub supports_hot_plug: bool,
    pub supports_polling: bool,
    pub supports_interrupt: bool,
    pub max_devices: u32,
    pub scan_duration_ms: u64,
    pub detection_timeout_ms: u64,
}

/// Device presence state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceState {
    Present,           // Device is currently present
    Absent,            // Device is absent
    Transitioning,     // Device is being inserted/removed
    Error,             // Error determining presence
    Unknown,           // State is unknown
}

/// Enhanced hot-plug device with additional tracking
#[derive(Debug, Clone)]
pub struct EnhancedHotPlugDevice {
    pub device_id: u32,
    pub device_type: DeviceType,
    pub bus_type: BusType,
    pub is_present: bool,
    pub presence_state: PresenceState,
    pub last_seen_timestamp: u64,
    pub insertion_count: u32,
    pub removal_count: u32,
    pub error_count: u32,
    pub timeout_count: u32,
    pub hot_plug_capable: bool,
    pub detection_strategy: DetectionStrategy,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
    pub serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub capabilities: DeviceCapabilities,
    pub power_requirements_mw: u32,
    pub bandwidth_requirements_mbps: u32,
}

/// Enhanced hot-plug manager with advanced detection
pub struct EnhancedHotPlugManager {
    active_devices: BTreeMap<u32, EnhancedHotPlugDevice>,
    device_history: Vec<HotPlugEvent>,
    notification_callbacks: Vec<fn(DeviceNotification)>,
    device_detection_enabled: bool,
    timeout_duration_ms: u64,
    max_history_entries: usize,
    total_events: u32,
    device_counter: u32,
    detection_strategies: BTreeMap<BusType, DetectionStrategy>,
    bus_capabilities: BTreeMap<BusType, BusDetectionCapabilities>,
    polling_intervals: BTreeMap<BusType, u64>,
    async_detection_handlers: Vec<fn(BusType) -> Result<Vec<EnhancedHotPlugDevice>, AdvancedDriverError>>,
    presence_tracking: BTreeMap<u32, PresenceState>,
}

impl EnhancedHotPlugManager {
    /// Create a new enhanced hot-plug manager
    pub fn new() -> Self {
        info!("Initializing Enhanced Hot-Plug Manager");
        
        let mut manager = Self {
            active_devices: BTreeMap::new(),
            device_history: Vec::new(),
            notification_callbacks: Vec::new(),
            device_detection_enabled: true,
            timeout_duration_ms: 10000, // 10 seconds default
            max_history_entries: 1000,
            total_events: 0,
            device_counter: 0,
            detection_strategies: BTreeMap::new(),
            bus_capabilities: BTreeMap::new(),
            polling_intervals: BTreeMap::new(),
            async_detection_handlers: Vec::new(),
            presence_tracking: BTreeMap::new(),
        };
        
        // Initialize bus capabilities
        manager.initialize_bus_capabilities();
        manager.initialize_detection_strategies();
        
        info!("Enhanced Hot-Plug Manager initialized");
        manager
    }

    /// Initialize bus capabilities
    fn initialize_bus_capabilities(&mut self) {
        // USB capabilities
        self.bus_capabilities.insert(BusType::USB, BusDetectionCapabilities {
            bus_type: BusType::USB,
            supports_hot_plug: true,
            supports_polling: true,
            supports_interrupt: true,
            max_devices: 127,
            scan_duration_ms: 100,
            detection_timeout_ms: 5000,
        });

        // PCI capabilities
        self.bus_capabilities.insert(BusType::PCI, BusDetectionCapabilities {
            bus_type: BusType::PCI,
            supports_hot_plug: true,
            supports_polling: true,
            supports_interrupt: true,
            max_devices: 256,
            scan_duration_ms: 50,
            detection_timeout_ms: 3000,
        });

        // PCMCIA/ExpressCard capabilities
        self.bus_capabilities.insert(BusType::PCMCIA, BusDetectionCapabilities {
            bus_type: BusType::PCMCIA,
            supports_hot_plug: true,
            supports_polling: true,
            supports_interrupt: false,
            max_devices: 4,
            scan_duration_ms: 200,
            detection_timeout_ms: 2000,
        });

        // Thunderbolt capabilities
        self.bus_capabilities.insert(BusType::Thunderbolt, BusDetectionCapabilities {
            bus_type: BusType::Thunderbolt,
            supports_hot_plug: true,
            supports_polling: true,
            supports_interrupt: true,
            max_devices: 12,
            scan_duration_ms: 75,
            detection_timeout_ms: 4000,
        });

        // FireWire capabilities
        self.bus_capabilities.insert(BusType::FireWire, BusDetectionCapabilities {
            bus_type: BusType::FireWire,
            supports_hot_plug: true,
            supports_polling: true,
            supports_interrupt: true,
            max_devices: 63,
            scan_duration_ms: 150,
            detection_timeout_ms: 3000,
        });
    }

    /// Initialize detection strategies
    fn initialize_detection_strategies(&mut self) {
        self.detection_strategies.insert(BusType::USB, DetectionStrategy::EventDriven);
        self.detection_strategies.insert(BusType::PCI, DetectionStrategy::Interrupt);
        self.detection_strategies.insert(BusType::PCMCIA, DetectionStrategy::Polling);
        self.detection_strategies.insert(BusType::ExpressCard, DetectionStrategy::Polling);
        self.detection_strategies.insert(BusType::Thunderbolt, DetectionStrategy::Interrupt);
        self.detection_strategies.insert(BusType::FireWire, DetectionStrategy::EventDriven);
        self.detection_strategies.insert(BusType::Serial, DetectionStrategy::Polling);
        self.detection_strategies.insert(BusType::Parallel, DetectionStrategy::Polling);
        self.detection_strategies.insert(BusType::Other, DetectionStrategy::Polling);

        // Set polling intervals for polling-based detection
        self.polling_intervals.insert(BusType::PCMCIA, 1000); // 1 second
        self.polling_intervals.insert(BusType::ExpressCard, 1000); // 1 second
        self.polling_intervals.insert(BusType::Serial, 500); // 500ms
        self.polling_intervals.insert(BusType::Parallel, 1000); // 1 second
        self.polling_intervals.insert(BusType::Other, 2000); // 2 seconds
    }

    /// Register an enhanced hot-plug device
    pub fn register_enhanced_device(&mut self, device_type: DeviceType, bus_type: BusType, 
                                   vendor_id: Option<u16>, product_id: Option<u16>) -> Result<u32, AdvancedDriverError> {
        debug!("Registering enhanced hot-plug device: {:?} on {:?}", device_type, bus_type);
        
        let device_id = self.allocate_device_id();
        let detection_strategy = self.detection_strategies.get(&bus_type).copied().unwrap_or(DetectionStrategy::Polling);
        
        let device = EnhancedHotPlugDevice {
            device_id,
            device_type,
            bus_type,
            is_present: true,
            presence_state: PresenceState::Present,
            last_seen_timestamp: 0, // TODO: Get actual timestamp
            insertion_count: 1,
            removal_count: 0,
            error_count: 0,
            timeout_count: 0,
            hot_plug_capable: true,
            detection_strategy,
            vendor_id,
            product_id,
            serial_number: None,
            firmware_version: None,
            capabilities: crate::DeviceCapabilities::HOT_PLUG,
            power_requirements_mw: self.estimate_power_requirements(device_type),
            bandwidth_requirements_mbps: self.estimate_bandwidth_requirements(device_type, bus_type),
        };
        
        self.active_devices.insert(device_id, device);
        self.presence_tracking.insert(device_id, PresenceState::Present);
        
        // Create hot-plug event
        let event = HotPlugEvent {
            event_type: HotPlugEventType::DeviceInserted,
            device_id,
            device_type,
            bus_type,
            port: None,
            timestamp: 0,
            vendor_id,
            product_id,
            description: None,
        };
        
        self.handle_device_event(event);
        
        info!("Enhanced hot-plug device registered: ID {} ({:?} on {:?})", device_id, device_type, bus_type);
        Ok(device_id)
    }

    /// Set detection strategy for a specific bus
    pub fn set_detection_strategy(&mut self, bus_type: BusType, strategy: DetectionStrategy) -> Result<(), AdvancedDriverError> {
        debug!("Setting detection strategy for {:?}: {:?}", bus_type, strategy);
        self.detection_strategies.insert(bus_type, strategy);
        Ok(())
    }

    /// Set polling interval for a bus
    pub fn set_polling_interval(&mut self, bus_type: BusType, interval_ms: u64) -> Result<(), AdvancedDriverError> {
        debug!("Setting polling interval for {:?}: {} ms", bus_type, interval_ms);
        self.polling_intervals.insert(bus_type, interval_ms);
        Ok(())
    }

    /// Register async detection handler
    pub fn register_async_handler(&mut self, handler: fn(BusType) -> Result<Vec<EnhancedHotPlugDevice>, AdvancedDriverError>) {
        debug!("Registering async detection handler");
        self.async_detection_handlers.push(handler);
    }

    /// Perform comprehensive device scan
    pub fn scan_all_buses(&mut self) -> Result<ScanResult, AdvancedDriverError> {
        debug!("Performing comprehensive bus scan");
        
        let mut scan_result = ScanResult::new();
        let mut new_devices = Vec::new();
        let mut removed_devices = Vec::new();
        let mut errors = Vec::new();
        
        for (bus_type, capabilities) in &self.bus_capabilities {
            if !capabilities.supports_hot_plug {
                continue;
            }
            
            match self.scan_bus(*bus_type) {
                Ok(bus_result) => {
                    scan_result.total_devices_scanned += bus_result.scanned_devices.len();
                    scan_result.bus_scan_times.insert(*bus_type, bus_result.scan_duration_ms);
                    
                    for device in bus_result.scanned_devices {
                        if !self.is_device_already_registered(&device) {
                            new_devices.push(device);
                        }
                    }
                    
                    for old_device_id in bus_result.removed_devices {
                        removed_devices.push(old_device_id);
                    }
                }
                Err(e) => {
                    errors.push((*bus_type, e));
                    warn!("Bus scan failed for {:?}: {:?}", bus_type, e);
                }
            }
        }
        
        // Register new devices
        for device in new_devices {
            let device_id = self.register_device_from_scan(device)?;
            scan_result.new_devices.push(device_id);
        }
        
        // Remove absent devices
        for device_id in removed_devices {
            let _ = self.mark_device_absent(device_id);
        }
        
        scan_result.new_devices_count = scan_result.new_devices.len();
        scan_result.removed_devices_count = removed_devices.len();
        scan_result.errors = errors.len();
        
        info!("Bus scan completed: {} new, {} removed, {} errors", 
              scan_result.new_devices_count, scan_result.removed_devices_count, scan_result.errors);
        
        Ok(scan_result)
    }

    /// Scan a specific bus
    fn scan_bus(&mut self, bus_type: BusType) -> Result<BusScanResult, AdvancedDriverError> {
        let strategy = self.detection_strategies.get(&bus_type).copied().unwrap_or(DetectionStrategy::Polling);
        let capabilities = self.bus_capabilities.get(&bus_type).ok_or(DeviceNotFound)?;
        
        debug!("Scanning bus {:?} using {:?} strategy", bus_type, strategy);
        
        let start_time = 0; // TODO: Get actual timestamp
        
        let mut scanned_devices = Vec::new();
        let mut removed_devices = Vec::new();
        
        match strategy {
            DetectionStrategy::Polling => {
                self.polling_scan_bus(bus_type, &mut scanned_devices, &mut removed_devices)?;
            }
            DetectionStrategy::Interrupt => {
                self.interrupt_scan_bus(bus_type, &mut scanned_devices, &mut removed_devices)?;
            }
            DetectionStrategy::EventDriven => {
                self.event_driven_scan_bus(bus_type, &mut scanned_devices, &mut removed_devices)?;
            }
            DetectionStrategy::Async => {
                self.async_scan_bus(bus_type, &mut scanned_devices, &mut removed_devices)?;
            }
        }
        
        let scan_duration_ms = 0; // TODO: Calculate actual duration
        
        Ok(BusScanResult {
            bus_type,
            scanned_devices,
            removed_devices,
            scan_duration_ms,
            strategy,
        })
    }

    /// Perform polling-based bus scan
    fn polling_scan_bus(&self, bus_type: BusType, devices: &mut Vec<EnhancedHotPlugDevice>, 
                       removed: &mut Vec<u32>) -> Result<(), AdvancedDriverError> {
        let interval = self.polling_intervals.get(&bus_type).copied().unwrap_or(1000);
        debug!("Polling scan for {:?} (interval: {} ms)", bus_type, interval);
        
        // Simulate polling-based device detection
        // In real implementation, would poll hardware registers
        match bus_type {
            BusType::PCMCIA => {
                // Simulate PCMCIA card detection
                devices.push(self.create_simulated_device(bus_type, DeviceType::Network, 0x1234, 0x5678));
            }
            BusType::ExpressCard => {
                // Simulate ExpressCard detection
                devices.push(self.create_simulated_device(bus_type, DeviceType::USB, 0xABCD, 0x1234));
            }
            BusType::Serial => {
                // Simulate serial device detection
                devices.push(self.create_simulated_device(bus_type, DeviceType::Unknown, 0, 0));
            }
            BusType::Parallel => {
                // Simulate parallel device detection
                devices.push(self.create_simulated_device(bus_type, DeviceType::Unknown, 0, 0));
            }
            _ => {
                // Other bus types may not support polling
            }
        }
        
        Ok(())
    }

    /// Perform interrupt-driven bus scan
    fn interrupt_scan_bus(&self, bus_type: BusType, devices: &mut Vec<EnhancedHotPlugDevice>, 
                         removed: &mut Vec<u32>) -> Result<(), AdvancedDriverError> {
        debug!("Interrupt-driven scan for {:?}", bus_type);
        
        // For interrupt-driven buses, we check interrupt status
        // and look for devices that signaled interrupts
        match bus_type {
            BusType::PCI => {
                // PCI supports hot-plug via interrupts
                // In real implementation, would check PCI configuration space
                devices.push(self.create_simulated_device(bus_type, DeviceType::Storage, 0x8086, 0x1234));
            }
            BusType::Thunderbolt => {
                // Thunderbolt uses interrupts for device events
                devices.push(self.create_simulated_device(bus_type, DeviceType::Display, 0x1234, 0xABCD));
            }
            _ => {}
        }
        
        Ok(())
    }

    /// Perform event-driven bus scan
    fn event_driven_scan_bus(&self, bus_type: BusType, devices: &mut Vec<EnhancedHotPlugDevice>, 
                            removed: &mut Vec<u32>) -> Result<(), AdvancedDriverError> {
        debug!("Event-driven scan for {:?}", bus_type);
        
        // Event-driven buses notify us of changes
        match bus_type {
            BusType::USB => {
                // USB hub events
                devices.push(self.create_simulated_device(bus_type, DeviceType::USB, 0x1234, 0x5678));
                devices.push(self.create_simulated_device(bus_type, DeviceType::Keyboard, 0x045e, 0x07d1));
            }
            BusType::FireWire => {
                // FireWire events
                devices.push(self.create_simulated_device(bus_type, DeviceType::Storage, 0xABCD, 0x1234));
            }
            _ => {}
        }
        
        Ok(())
    }

    /// Perform async bus scan
    fn async_scan_bus(&self, bus_type: BusType, devices: &mut Vec<EnhancedHotPlugDevice>, 
                     removed: &mut Vec<u32>) -> Result<(), AdvancedDriverError> {
        debug!("Async scan for {:?}", bus_type);
        
        // Use registered async handlers
        for handler in &self.async_detection_handlers {
            match handler(bus_type) {
                Ok(handler_devices) => {
                    devices.extend(handler_devices);
                }
                Err(e) => {
                    warn!("Async handler failed for bus {:?}: {:?}", bus_type, e);
                }
            }
        }
        
        Ok(())
    }

    /// Create a simulated device for testing
    fn create_simulated_device(&self, bus_type: BusType, device_type: DeviceType, 
                              vendor_id: u16, product_id: u16) -> EnhancedHotPlugDevice {
        let device_id = self.allocate_device_id();
        let detection_strategy = self.detection_strategies.get(&bus_type).copied().unwrap_or(DetectionStrategy::Polling);
        
        EnhancedHotPlugDevice {
            device_id,
            device_type,
            bus_type,
            is_present: true,
            presence_state: PresenceState::Present,
            last_seen_timestamp: 0,
            insertion_count: 1,
            removal_count: 0,
            error_count: 0,
            timeout_count: 0,
            hot_plug_capable: true,
            detection_strategy,
            vendor_id: if vendor_id != 0 { Some(vendor_id) } else { None },
            product_id: if product_id != 0 { Some(product_id) } else { None },
            serial_number: None,
            firmware_version: None,
            capabilities: crate::DeviceCapabilities::HOT_PLUG,
            power_requirements_mw: self.estimate_power_requirements(device_type),
            bandwidth_requirements_mbps: self.estimate_bandwidth_requirements(device_type, bus_type),
        }
    }

    /// Estimate power requirements for device type
    fn estimate_power_requirements(&self, device_type: DeviceType) -> u32 {
        match device_type {
            DeviceType::Display => 5000,    // 5W for displays
            DeviceType::Network => 2000,    // 2W for network cards
            DeviceType::Storage => 10000,   // 10W for storage devices
            DeviceType::Audio => 500,       // 0.5W for audio devices
            DeviceType::USB => 100,         // 0.1W per USB device
            DeviceType::Keyboard => 50,     // 0.05W for keyboards
            DeviceType::Mouse => 25,        // 0.025W for mice
            _ => 100,                       // 0.1W default
        }
    }

    /// Estimate bandwidth requirements for device type and bus
    fn estimate_bandwidth_requirements(&self, device_type: DeviceType, bus_type: BusType) -> u32 {
        let base_bandwidth = match bus_type {
            BusType::USB => match device_type {
                DeviceType::Display => 480,  // USB 2.0 high-speed
                DeviceType::Network => 1000, // Gigabit over USB
                DeviceType::Storage => 480,  // USB 2.0 storage
                DeviceType::Audio => 12,     // USB audio
                _ => 12,                     // USB low-speed
            },
            BusType::PCI => 2000,           // PCI bandwidth
            BusType::Thunderbolt => 40000,  // Thunderbolt bandwidth
            BusType::FireWire => 800,       // FireWire bandwidth
            BusType::Serial => 0.1152,      // Serial bandwidth (115.2 kbps)
            BusType::Parallel => 0.01,      // Parallel bandwidth (10 kbps)
            _ => 0,                         // Unknown
        };
        
        (base_bandwidth * 1000) as u32 // Convert to kbps for consistency
    }

    /// Check if device is already registered
    fn is_device_already_registered(&self, device: &EnhancedHotPlugDevice) -> bool {
        self.active_devices.values().any(|existing| 
            existing.device_type == device.device_type &&
            existing.bus_type == device.bus_type &&
            existing.vendor_id == device.vendor_id &&
            existing.product_id == device.product_id
        )
    }

    /// Register device found during scan
    fn register_device_from_scan(&mut self, device: EnhancedHotPlugDevice) -> Result<u32, AdvancedDriverError> {
        let device_id = device.device_id;
        self.active_devices.insert(device_id, device);
        self.presence_tracking.insert(device_id, PresenceState::Present);
        Ok(device_id)
    }

    /// Mark device as absent
    fn mark_device_absent(&mut self, device_id: u32) -> Result<(), AdvancedDriverError> {
        if let Some(device) = self.active_devices.get_mut(&device_id) {
            device.is_present = false;
            device.presence_state = PresenceState::Absent;
            device.removal_count += 1;
            self.presence_tracking.insert(device_id, PresenceState::Absent);
            Ok(())
        } else {
            Err(DeviceNotFound)
        }
    }

    /// Get bus capabilities
    pub fn get_bus_capabilities(&self, bus_type: BusType) -> Option<&BusDetectionCapabilities> {
        self.bus_capabilities.get(&bus_type)
    }

    /// Get all bus capabilities
    pub fn get_all_bus_capabilities(&self) -> BTreeMap<BusType, BusDetectionCapabilities> {
        self.bus_capabilities.clone()
    }

    /// Get detection strategy for bus
    pub fn get_detection_strategy(&self, bus_type: BusType) -> Option<DetectionStrategy> {
        self.detection_strategies.get(&bus_type).copied()
    }
}

/// Backwards compatibility type alias
pub type HotPlugManager = EnhancedHotPlugManager;

    /// Enable device detection
    pub fn enable_detection(&mut self) -> Result<(), AdvancedDriverError> {
        debug!("Enabling hot-plug device detection");
        self.device_detection_enabled = true;
        Ok(())
    }

    /// Disable device detection
    pub fn disable_detection(&mut self) -> Result<(), AdvancedDriverError> {
        debug!("Disabling hot-plug device detection");
        self.device_detection_enabled = false;
        Ok(())
    }

    /// Register a hot-plug device
    pub fn register_device(&mut self, device_type: DeviceType, bus_type: BusType, port: Option<u8>) -> Result<u32, AdvancedDriverError> {
        debug!("Registering hot-plug device: {:?} on {:?}", device_type, bus_type);
        
        let device_id = self.allocate_device_id();
        
        let device = HotPlugDevice {
            device_id,
            device_type,
            bus_type,
            is_present: true,
            last_seen_timestamp: 0, // TODO: Get actual timestamp
            insertion_count: 1,
            removal_count: 0,
            error_count: 0,
            timeout_count: 0,
            hot_plug_capable: true,
        };
        
        self.active_devices.insert(device_id, device);
        
        // Create hot-plug event
        let event = HotPlugEvent {
            event_type: HotPlugEventType::DeviceInserted,
            device_id,
            device_type,
            bus_type,
            port,
            timestamp: 0,
            vendor_id: None,
            product_id: None,
            description: None,
        };
        
        self.handle_device_event(event);
        
        info!("Hot-plug device registered: ID {} ({:?} on {:?})", device_id, device_type, bus_type);
        Ok(device_id)
    }

    /// Unregister a hot-plug device
    pub fn unregister_device(&mut self, device_id: u32) -> Result<(), AdvancedDriverError> {
        debug!("Unregistering hot-plug device: {}", device_id);
        
        let device = self.active_devices.remove(&device_id)
            .ok_or(DeviceNotFound)?;
        
        // Create hot-plug event
        let event = HotPlugEvent {
            event_type: HotPlugEventType::DeviceRemoved,
            device_id,
            device_type: device.device_type,
            bus_type: device.bus_type,
            port: None,
            timestamp: 0,
            vendor_id: None,
            product_id: None,
            description: None,
        };
        
        self.handle_device_event(event);
        
        info!("Hot-plug device unregistered: ID {}", device_id);
        Ok(())
    }

    /// Report device insertion
    pub fn device_inserted(&mut self, device_id: u32, vendor_id: Option<u16>, product_id: Option<u16>) -> Result<(), AdvancedDriverError> {
        debug!("Device inserted: ID {}", device_id);
        
        if let Some(device) = self.active_devices.get_mut(&device_id) {
            device.is_present = true;
            device.insertion_count += 1;
            device.last_seen_timestamp = 0; // TODO: Get actual timestamp
        } else {
            warn!("Device insertion reported for unknown device ID: {}", device_id);
            return Err(DeviceNotFound);
        }
        
        // Create hot-plug event
        let event = HotPlugEvent {
            event_type: HotPlugEventType::DeviceInserted,
            device_id,
            device_type: DeviceType::Unknown,
            bus_type: BusType::Other,
            port: None,
            timestamp: 0,
            vendor_id,
            product_id,
            description: None,
        };
        
        self.handle_device_event(event);
        
        info!("Device insertion event processed: ID {}", device_id);
        Ok(())
    }

    /// Report device removal
    pub fn device_removed(&mut self, device_id: u32) -> Result<(), AdvancedDriverError> {
        debug!("Device removed: ID {}", device_id);
        
        if let Some(device) = self.active_devices.get_mut(&device_id) {
            device.is_present = false;
            device.removal_count += 1;
        } else {
            warn!("Device removal reported for unknown device ID: {}", device_id);
            return Err(DeviceNotFound);
        }
        
        // Create hot-plug event
        let event = HotPlugEvent {
            event_type: HotPlugEventType::DeviceRemoved,
            device_id,
            device_type: DeviceType::Unknown,
            bus_type: BusType::Other,
            port: None,
            timestamp: 0,
            vendor_id: None,
            product_id: None,
            description: None,
        };
        
        self.handle_device_event(event);
        
        info!("Device removal event processed: ID {}", device_id);
        Ok(())
    }

    /// Report device change
    pub fn device_changed(&mut self, device_id: u32, description: String) -> Result<(), AdvancedDriverError> {
        debug!("Device changed: ID {}", device_id);
        
        if !self.active_devices.contains_key(&device_id) {
            warn!("Device change reported for unknown device ID: {}", device_id);
            return Err(DeviceNotFound);
        }
        
        // Create hot-plug event
        let event = HotPlugEvent {
            event_type: HotPlugEventType::DeviceChanged,
            device_id,
            device_type: DeviceType::Unknown,
            bus_type: BusType::Other,
            port: None,
            timestamp: 0,
            vendor_id: None,
            product_id: None,
            description: Some(description),
        };
        
        self.handle_device_event(event);
        
        info!("Device change event processed: ID {}", device_id);
        Ok(())
    }

    /// Report device timeout
    pub fn device_timeout(&mut self, device_id: u32) -> Result<(), AdvancedDriverError> {
        debug!("Device timeout: ID {}", device_id);
        
        if let Some(device) = self.active_devices.get_mut(&device_id) {
            device.timeout_count += 1;
        }
        
        // Create hot-plug event
        let event = HotPlugEvent {
            event_type: HotPlugEventType::DeviceTimeout,
            device_id,
            device_type: DeviceType::Unknown,
            bus_type: BusType::Other,
            port: None,
            timestamp: 0,
            vendor_id: None,
            product_id: None,
            description: None,
        };
        
        self.handle_device_event(event);
        
        warn!("Device timeout event processed: ID {}", device_id);
        Ok(())
    }

    /// Report device error
    pub fn device_error(&mut self, device_id: u32) -> Result<(), AdvancedDriverError> {
        debug!("Device error: ID {}", device_id);
        
        if let Some(device) = self.active_devices.get_mut(&device_id) {
            device.error_count += 1;
        }
        
        // Create hot-plug event
        let event = HotPlugEvent {
            event_type: HotPlugEventType::DeviceError,
            device_id,
            device_type: DeviceType::Unknown,
            bus_type: BusType::Other,
            port: None,
            timestamp: 0,
            vendor_id: None,
            product_id: None,
            description: None,
        };
        
        self.handle_device_event(event);
        
        error!("Device error event processed: ID {}", device_id);
        Ok(())
    }

    /// Get active devices
    pub fn get_active_devices(&self) -> Vec<&HotPlugDevice> {
        self.active_devices.values()
            .filter(|device| device.is_present)
            .collect()
    }

    /// Get device by ID
    pub fn get_device(&self, device_id: u32) -> Option<&HotPlugDevice> {
        self.active_devices.get(&device_id)
    }

    /// Check if device is present
    pub fn is_device_present(&self, device_id: u32) -> bool {
        self.active_devices.get(&device_id)
            .map(|device| device.is_present)
            .unwrap_or(false)
    }

    /// Get device event history
    pub fn get_event_history(&self) -> &[HotPlugEvent] {
        &self.device_history
    }

    /// Get hot-plug statistics
    pub fn get_statistics(&self) -> HotPlugStatistics {
        let mut present_devices = 0;
        let mut insertion_count = 0;
        let mut removal_count = 0;
        let mut error_count = 0;
        let mut timeout_count = 0;
        
        for device in self.active_devices.values() {
            if device.is_present {
                present_devices += 1;
            }
            insertion_count += device.insertion_count;
            removal_count += device.removal_count;
            error_count += device.error_count;
            timeout_count += device.timeout_count;
        }
        
        HotPlugStatistics {
            total_devices: self.active_devices.len(),
            present_devices,
            insertion_count,
            removal_count,
            error_count,
            timeout_count,
            total_events: self.total_events,
            detection_enabled: self.device_detection_enabled,
        }
    }

    /// Register notification callback
    pub fn register_notification_callback(&mut self, callback: fn(DeviceNotification)) {
        self.notification_callbacks.push(callback);
    }

    /// Set notification level
    pub fn set_notification_level(&self, device_id: u32, level: NotificationLevel) -> Result<(), AdvancedDriverError> {
        debug!("Setting notification level for device {}: {:?}", device_id, level);
        // Implementation would store per-device notification levels
        Ok(())
    }

    /// Set timeout duration
    pub fn set_timeout_duration(&mut self, duration_ms: u64) -> Result<(), AdvancedDriverError> {
        debug!("Setting timeout duration to {} ms", duration_ms);
        self.timeout_duration_ms = duration_ms;
        Ok(())
    }

    /// Set maximum history entries
    pub fn set_max_history_entries(&mut self, max_entries: usize) -> Result<(), AdvancedDriverError> {
        debug!("Setting max history entries to {}", max_entries);
        self.max_history_entries = max_entries;
        Ok(())
    }

    /// Scan for hot-plug devices
    pub fn scan_devices(&mut self) -> Result<(), AdvancedDriverError> {
        debug!("Scanning for hot-plug devices");
        
        if !self.device_detection_enabled {
            warn!("Device detection is disabled");
            return Ok(());
        }
        
        // In a real implementation, this would scan hardware buses
        // For now, we'll simulate some device detection
        self.simulate_device_detection();
        
        info!("Device scan completed");
        Ok(())
    }

    /// Internal: Allocate a new device ID
    fn allocate_device_id(&mut self) -> u32 {
        self.device_counter += 1;
        self.device_counter
    }

    /// Internal: Handle device event
    fn handle_device_event(&mut self, event: HotPlugEvent) {
        self.total_events += 1;
        
        // Add to history
        self.device_history.push(event.clone());
        
        // Limit history size
        if self.device_history.len() > self.max_history_entries {
            self.device_history.remove(0);
        }
        
        // Create notification
        let notification = DeviceNotification {
            event,
            notification_level: NotificationLevel::Info,
            user_message: None,
        };
        
        // Notify callbacks
        self.notify_callbacks(notification);
    }

    /// Internal: Notify all callbacks
    fn notify_callbacks(&self, notification: DeviceNotification) {
        for callback in &self.notification_callbacks {
            callback(notification.clone());
        }
    }

    /// Internal: Simulate device detection (for testing)
    fn simulate_device_detection(&mut self) {
        // This would be replaced with actual hardware scanning
        debug!("Simulating device detection");
        
        // Simulate finding a USB device
        if self.active_devices.is_empty() {
            let _ = self.register_device(DeviceType::USB, BusType::USB, Some(1));
        }
    }

    /// Get event count
    pub fn get_event_count(&self) -> u32 {
        self.total_events
    }

    /// Clear device history
    pub fn clear_history(&mut self) -> Result<(), AdvancedDriverError> {
        debug!("Clearing device history");
        self.device_history.clear();
        Ok(())
    }

    /// Force device presence check
    pub fn force_presence_check(&mut self) -> Result<(), AdvancedDriverError> {
        debug!("Forcing device presence check");
        
        for (device_id, device) in self.active_devices.iter_mut() {
            if !device.is_present {
                device.timeout_count += 1;
                
                let event = HotPlugEvent {
                    event_type: HotPlugEventType::DeviceTimeout,
                    device_id: *device_id,
                    device_type: device.device_type,
                    bus_type: device.bus_type,
                    port: None,
                    timestamp: 0,
                    vendor_id: None,
                    product_id: None,
                    description: None,
                };
                
                self.handle_device_event(event);
            }
        }
        
        Ok(())
    }
}

/// Hot-plug statistics
#[derive(Debug, Clone)]
pub struct HotPlugStatistics {
    pub total_devices: usize,
    pub present_devices: usize,
    pub insertion_count: u32,
    pub removal_count: u32,
    pub error_count: u32,
    pub timeout_count: u32,
    pub total_events: u32,
    pub detection_enabled: bool,
}

/// Scan result for comprehensive bus scanning
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub total_devices_scanned: usize,
    pub new_devices: Vec<u32>,
    pub new_devices_count: usize,
    pub removed_devices_count: usize,
    pub errors: usize,
    pub bus_scan_times: BTreeMap<BusType, u64>,
    pub scan_timestamp: u64,
}

impl ScanResult {
    pub fn new() -> Self {
        Self {
            total_devices_scanned: 0,
            new_devices: Vec::new(),
            new_devices_count: 0,
            removed_devices_count: 0,
            errors: 0,
            bus_scan_times: BTreeMap::new(),
            scan_timestamp: 0, // TODO: Get actual timestamp
        }
    }
}

/// Bus scan result
#[derive(Debug, Clone)]
pub struct BusScanResult {
    pub bus_type: BusType,
    pub scanned_devices: Vec<EnhancedHotPlugDevice>,
    pub removed_devices: Vec<u32>,
    pub scan_duration_ms: u64,
    pub strategy: DetectionStrategy,
}

impl Default for EnhancedHotPlugManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_registration() {
        let mut manager = EnhancedHotPlugManager::new();
        
        let device_id = manager.register_device(DeviceType::USB, BusType::USB, Some(1)).unwrap();
        assert_eq!(device_id, 1);
        
        let device = manager.get_device(device_id).unwrap();
        assert_eq!(device.device_type, DeviceType::USB);
        assert!(device.is_present);
    }

    #[test]
    fn test_enhanced_device_registration() {
        let mut manager = EnhancedHotPlugManager::new();
        
        let device_id = manager.register_enhanced_device(
            DeviceType::USB, 
            BusType::USB, 
            Some(0x1234), 
            Some(0x5678)
        ).unwrap();
        
        assert_eq!(device_id, 1);
        
        let device = manager.get_device(device_id).unwrap();
        assert_eq!(device.device_type, DeviceType::USB);
        assert_eq!(device.vendor_id, Some(0x1234));
        assert_eq!(device.product_id, Some(0x5678));
        assert!(device.is_present);
    }

    #[test]
    fn test_detection_strategy_configuration() {
        let mut manager = EnhancedHotPlugManager::new();
        
        // Test setting detection strategies
        assert!(manager.set_detection_strategy(BusType::USB, DetectionStrategy::Async).is_ok());
        assert!(manager.set_detection_strategy(BusType::PCI, DetectionStrategy::EventDriven).is_ok());
        assert!(manager.set_detection_strategy(BusType::Serial, DetectionStrategy::Polling).is_ok());
        
        assert_eq!(manager.get_detection_strategy(BusType::USB), Some(DetectionStrategy::Async));
        assert_eq!(manager.get_detection_strategy(BusType::PCI), Some(DetectionStrategy::EventDriven));
        assert_eq!(manager.get_detection_strategy(BusType::Serial), Some(DetectionStrategy::Polling));
    }

    #[test]
    fn test_bus_capabilities() {
        let manager = EnhancedHotPlugManager::new();
        
        let usb_capabilities = manager.get_bus_capabilities(BusType::USB).unwrap();
        assert_eq!(usb_capabilities.bus_type, BusType::USB);
        assert!(usb_capabilities.supports_hot_plug);
        assert!(usb_capabilities.supports_polling);
        assert!(usb_capabilities.supports_interrupt);
        assert_eq!(usb_capabilities.max_devices, 127);
        
        let pcmcia_capabilities = manager.get_bus_capabilities(BusType::PCMCIA).unwrap();
        assert!(pcmcia_capabilities.supports_hot_plug);
        assert!(pcmcia_capabilities.supports_polling);
        assert!(!pcmcia_capabilities.supports_interrupt);
    }

    #[test]
    fn test_comprehensive_bus_scan() {
        let mut manager = EnhancedHotPlugManager::new();
        
        let scan_result = manager.scan_all_buses();
        assert!(scan_result.is_ok());
        
        let result = scan_result.unwrap();
        assert!(result.total_devices_scanned > 0);
        // The scan should find some simulated devices
    }

    #[test]
    fn test_device_insertion_removal() {
        let mut manager = EnhancedHotPlugManager::new();
        
        let device_id = manager.register_enhanced_device(
            DeviceType::USB, 
            BusType::USB, 
            Some(0x1234), 
            Some(0x5678)
        ).unwrap();
        
        assert!(manager.device_inserted(device_id, Some(0x1234), Some(0x5678)).is_ok());
        assert!(manager.is_device_present(device_id));
        
        assert!(manager.device_removed(device_id).is_ok());
        let device = manager.get_device(device_id).unwrap();
        assert!(!device.is_present);
    }

    #[test]
    fn test_device_events() {
        let mut manager = EnhancedHotPlugManager::new();
        
        let device_id = manager.register_enhanced_device(
            DeviceType::USB, 
            BusType::USB, 
            Some(0x1234), 
            Some(0x5678)
        ).unwrap();
        
        // Trigger various events
        assert!(manager.device_timeout(device_id).is_ok());
        assert!(manager.device_error(device_id).is_ok());
        assert!(manager.device_changed(device_id, "Configuration changed".to_string()).is_ok());
        
        let history = manager.get_event_history();
        assert!(history.len() >= 3); // insertion + timeout + error + change
    }

    #[test]
    fn test_power_requirement_estimation() {
        let manager = EnhancedHotPlugManager::new();
        
        // Test different device types
        let display_power = manager.estimate_power_requirements(DeviceType::Display);
        let network_power = manager.estimate_power_requirements(DeviceType::Network);
        let storage_power = manager.estimate_power_requirements(DeviceType::Storage);
        let usb_power = manager.estimate_power_requirements(DeviceType::USB);
        
        assert_eq!(display_power, 5000);
        assert_eq!(network_power, 2000);
        assert_eq!(storage_power, 10000);
        assert_eq!(usb_power, 100);
    }

    #[test]
    fn test_bandwidth_requirement_estimation() {
        let manager = EnhancedHotPlugManager::new();
        
        // Test different bus types and device combinations
        let usb_display = manager.estimate_bandwidth_requirements(DeviceType::Display, BusType::USB);
        let pci_storage = manager.estimate_bandwidth_requirements(DeviceType::Storage, BusType::PCI);
        let thunderbolt_display = manager.estimate_bandwidth_requirements(DeviceType::Display, BusType::Thunderbolt);
        let serial_unknown = manager.estimate_bandwidth_requirements(DeviceType::Unknown, BusType::Serial);
        
        assert_eq!(usb_display, 480000);  // 480 Mbps
        assert_eq!(pci_storage, 2000000); // 2 Gbps
        assert_eq!(thunderbolt_display, 40000000); // 40 Gbps
        assert_eq!(serial_unknown, 115); // 115.2 kbps
    }

    #[test]
    fn test_statistics() {
        let mut manager = EnhancedHotPlugManager::new();
        
        let _device_id = manager.register_enhanced_device(
            DeviceType::USB, 
            BusType::USB, 
            Some(0x1234), 
            Some(0x5678)
        ).unwrap();
        
        let stats = manager.get_statistics();
        assert_eq!(stats.total_devices, 1);
        assert_eq!(stats.present_devices, 1);
        assert_eq!(stats.insertion_count, 1);
    }

    #[test]
    fn test_detection_control() {
        let mut manager = EnhancedHotPlugManager::new();
        
        assert!(manager.disable_detection().is_ok());
        
        // Detection should still work even when disabled for some operations
        let device_id = manager.register_device(DeviceType::USB, BusType::USB, Some(1)).unwrap();
        assert!(manager.device_inserted(device_id, None, None).is_ok());
        
        assert!(manager.enable_detection().is_ok());
    }

    #[test]
    fn test_async_handler_registration() {
        let mut manager = EnhancedHotPlugManager::new();
        
        let handler = |bus_type: BusType| -> Result<Vec<EnhancedHotPlugDevice>, AdvancedDriverError> {
            Ok(vec![])
        };
        
        manager.register_async_handler(handler);
        assert_eq!(manager.async_detection_handlers.len(), 1);
    }

    #[test]
    fn test_polling_interval_configuration() {
        let mut manager = EnhancedHotPlugManager::new();
        
        assert!(manager.set_polling_interval(BusType::Serial, 500).is_ok());
        assert!(manager.set_polling_interval(BusType::PCMCIA, 2000).is_ok());
        
        // These should be stored internally
        // The actual polling interval access would be through internal methods
    }

    #[test]
    fn test_bus_scan_result() {
        let mut manager = EnhancedHotPlugManager::new();
        
        // Perform a scan to generate results
        let scan_result = manager.scan_all_buses();
        assert!(scan_result.is_ok());
        
        let result = scan_result.unwrap();
        assert!(result.bus_scan_times.len() > 0);
    }
}
