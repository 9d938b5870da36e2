//! Update Scheduler Examples
//! 
//! This module contains examples demonstrating how to use the automated update scheduling system.

use super::*;
use alloc::sync::Arc;
use spin::Mutex;

/// Example: Initialize the update scheduler with basic configuration
pub fn basic_scheduler_example() -> Result<(), &'static str> {
    // Create basic configuration
    let config = config::basic_config();
    
    // Create mock security and service managers
    // In real implementation, these would be proper kernel services
    let security_manager = Arc::new(Mutex::new(crate::security::SecurityManager::new()));
    let service_manager = Arc::new(Mutex::new(crate::service_manager::ServiceManager::new()));
    
    // Create scheduler
    let scheduler = UpdateScheduler::new(config, security_manager, service_manager);
    
    // Initialize
    scheduler.initialize()?;
    
    Ok(())
}

/// Example: Schedule a critical security update
pub fn security_update_example() -> Result<(), &'static str> {
    // Get global scheduler (assuming it's already initialized)
    let scheduler = get_global_scheduler()
        .ok_or("Scheduler not initialized")?;
    
    // Create security patch update
    let task = UpdateTask {
        id: 0,
        priority: UpdatePriority::Critical,
        scheduled_time: None,
        estimated_duration: 15, // 15 minutes
        update_type: UpdateType::SecurityPatch {
            vulnerability_id: Some("CVE-2023-12345".to_string()),
            severity: 9, // High severity
        },
        retry_count: 0,
        status: UpdateStatus::Pending,
    };
    
    // Schedule the update
    match scheduler.lock().schedule_update(task) {
        ScheduleResult::Scheduled(id) => {
            println!("Security update scheduled with ID: {}", id);
            Ok(())
        },
        ScheduleResult::Rejected(reason) => {
            println!("Security update rejected: {}", reason);
            Err("Update rejected")
        },
        _ => Err("Unexpected scheduling result"),
    }
}

/// Example: Schedule a kernel update
pub fn kernel_update_example() -> Result<(), &'static str> {
    let scheduler = get_global_scheduler()
        .ok_or("Scheduler not initialized")?;
    
    let task = UpdateTask {
        id: 0,
        priority: UpdatePriority::Important,
        scheduled_time: None,
        estimated_duration: 30, // 30 minutes for kernel update
        update_type: UpdateType::KernelUpdate {
            version: "1.2.3".to_string(),
            requires_reboot: true,
        },
        retry_count: 0,
        status: UpdateStatus::Pending,
    };
    
    match scheduler.lock().schedule_update(task) {
        ScheduleResult::Scheduled(id) => {
            println!("Kernel update scheduled with ID: {}", id);
            Ok(())
        },
        ScheduleResult::RequiresApproval => {
            println!("Kernel update requires user approval");
            Ok(())
        },
        _ => Err("Unexpected scheduling result"),
    }
}

/// Example: Configure server-focused scheduling
pub fn server_configuration_example() -> Result<(), &'static str> {
    // Use server-specific configuration
    let config = config::server_config();
    
    // Enable auto-approval for security updates
    let mut server_config = config;
    server_config.require_approval = false;
    server_config.max_concurrent_updates = 4;
    
    // Update global scheduler configuration if available
    if let Some(scheduler) = get_global_scheduler() {
        scheduler.lock().update_config(server_config)?;
        println!("Server configuration applied");
    }
    
    Ok(())
}

/// Example: Configure desktop user scheduling
pub fn desktop_configuration_example() -> Result<(), &'static str> {
    let config = config::desktop_config();
    
    // Set up notification callback for user interaction
    let notification_callback = |notification: &NotificationInfo| {
        match notification.notification_type {
            NotificationType::UpdateAvailable => {
                println!("Update available: {}", notification.message);
            },
            NotificationType::RequiresApproval => {
                println!("User approval required: {}", notification.message);
            },
            NotificationType::WillStart => {
                println!("Update starting: {}", notification.message);
            },
            NotificationType::Completed => {
                println!("Update completed: {}", notification.message);
            },
            NotificationType::Failed => {
                println!("Update failed: {}", notification.message);
            },
            NotificationType::MaintenanceStart => {
                println!("Maintenance starting: {}", notification.message);
            },
        }
    };
    
    if let Some(scheduler) = get_global_scheduler() {
        scheduler.lock().set_notification_callback(notification_callback);
        scheduler.lock().update_config(config)?;
    }
    
    Ok(())
}

/// Example: Emergency maintenance mode
pub fn emergency_maintenance_example() -> Result<(), &'static str> {
    let scheduler = get_global_scheduler()
        .ok_or("Scheduler not initialized")?;
    
    // Force all pending updates to execute immediately
    scheduler.lock().force_maintenance_mode()?;
    
    println!("Emergency maintenance mode activated");
    println!("All pending updates will be executed as soon as possible");
    
    Ok(())
}

/// Example: Monitor scheduler status
pub fn status_monitoring_example() -> Result<(), &'static str> {
    let scheduler = get_global_scheduler()
        .ok_or("Scheduler not initialized")?;
    
    let status = scheduler.lock().get_status();
    
    println!("=== Update Scheduler Status ===");
    println!("Running: {}", status.is_running);
    println!("Pending Updates: {}", status.pending_updates);
    println!("Scheduled Updates: {}", status.scheduled_updates);
    println!("Running Updates: {}", status.running_updates);
    println!("CPU Usage: {:.1}%", status.system_metrics.cpu_usage * 100.0);
    println!("Memory Usage: {:.1}%", status.system_metrics.memory_usage * 100.0);
    println!("Active Sessions: {}", status.system_metrics.active_sessions);
    
    if let Some(next_time) = status.next_scheduled_time {
        println!("Next Scheduled Update: {}", next_time);
    } else {
        println!("No updates scheduled");
    }
    
    Ok(())
}

/// Example: Schedule multiple update types
pub fn batch_update_example() -> Result<(), &'static str> {
    let scheduler = get_global_scheduler()
        .ok_or("Scheduler not initialized")?;
    
    // Create multiple updates of different types
    let updates = vec![
        // Security patch
        UpdateTask {
            id: 0,
            priority: UpdatePriority::Critical,
            scheduled_time: None,
            estimated_duration: 10,
            update_type: UpdateType::SecurityPatch {
                vulnerability_id: Some("CVE-2023-54321".to_string()),
                severity: 10,
            },
            retry_count: 0,
            status: UpdateStatus::Pending,
        },
        // Driver update
        UpdateTask {
            id: 0,
            priority: UpdatePriority::Important,
            scheduled_time: None,
            estimated_duration: 5,
            update_type: UpdateType::DriverUpdate {
                device_name: "NVIDIA GPU".to_string(),
                version: "525.85.12".to_string(),
            },
            retry_count: 0,
            status: UpdateStatus::Pending,
        },
        // Application update
        UpdateTask {
            id: 0,
            priority: UpdatePriority::Optional,
            scheduled_time: None,
            estimated_duration: 20,
            update_type: UpdateType::ApplicationUpdate {
                app_name: "Text Editor".to_string(),
                version: "2.1.0".to_string(),
                size_mb: 150,
            },
            retry_count: 0,
            status: UpdateStatus::Pending,
        },
    ];
    
    // Schedule all updates
    let mut scheduled_ids = Vec::new();
    for update in updates {
        match scheduler.lock().schedule_update(update) {
            ScheduleResult::Scheduled(id) => {
                scheduled_ids.push(id);
                println!("Scheduled update ID: {}", id);
            },
            ScheduleResult::RequiresApproval => {
                println!("Update requires approval");
            },
            ScheduleResult::Rejected(reason) => {
                println!("Update rejected: {}", reason);
            },
            ScheduleResult::ScheduleFailed(reason) => {
                println!("Scheduling failed: {}", reason);
            },
            _ => {
                println!("Unexpected result for update scheduling");
            }
        }
    }
    
    println!("Batch scheduling complete. {} updates scheduled.", scheduled_ids.len());
    
    Ok(())
}

/// Example: IoT device update configuration
pub fn iot_device_example() -> Result<(), &'static str> {
    // Use IoT-specific configuration
    let config = config::iot_config();
    
    if let Some(scheduler) = get_global_scheduler() {
        scheduler.lock().update_config(config)?;
        
        // Schedule firmware update for IoT device
        let task = UpdateTask {
            id: 0,
            priority: UpdatePriority::Important,
            scheduled_time: None,
            estimated_duration: 8,
            update_type: UpdateType::FirmwareUpdate {
                device_name: "Temperature Sensor".to_string(),
                version: "1.0.5".to_string(),
                critical: false,
            },
            retry_count: 0,
            status: UpdateStatus::Pending,
        };
        
        match scheduler.lock().schedule_update(task) {
            ScheduleResult::Scheduled(id) => {
                println!("IoT firmware update scheduled with ID: {}", id);
                Ok(())
            },
            _ => Err("Failed to schedule IoT update"),
        }
    } else {
        Err("Scheduler not initialized")
    }
}

/// Example: System usage pattern analysis
pub fn usage_pattern_analysis_example() -> Result<(), &'static str> {
    let scheduler = get_global_scheduler()
        .ok_or("Scheduler not initialized")?;
    
    let queue_status = scheduler.lock().get_queue_status();
    
    println!("=== Usage Pattern Analysis ===");
    println!("Total Updates in System: {}", queue_status.total_count);
    println!("Pending Queue: {}", queue_status.pending_count);
    println!("Scheduled Queue: {}", queue_status.scheduled_count);
    println!("Running Updates: {}", queue_status.running_count);
    
    // Analyze queue composition
    if queue_status.pending_count > 0 {
        println!("Recommendation: System has pending updates that could be scheduled");
    }
    
    if queue_status.running_count == 0 && queue_status.total_count > 0 {
        println!("Recommendation: No updates currently running - good time for maintenance");
    }
    
    Ok(())
}

/// Example: Integration with system monitoring
pub fn system_integration_example() -> Result<(), &'static str> {
    let scheduler = get_global_scheduler()
        .ok_or("Scheduler not initialized")?;
    
    let scheduler_clone = scheduler.clone();
    
    // Set up callback for system metrics
    let metrics_callback = move |metrics: &crate::services::SystemMetrics| {
        let scheduler = scheduler_clone.lock();
        
        // Adjust scheduling based on system load
        if metrics.cpu_usage > 0.8 {
            // High CPU usage - postpone non-critical updates
            println!("High CPU usage detected - postponing non-critical updates");
        }
        
        if metrics.memory_usage > 0.9 {
            // High memory usage - be conservative with updates
            println!("High memory usage detected - reducing concurrent updates");
        }
        
        if metrics.active_sessions > 50 {
            // Many active users - postpone updates
            println!("High user activity detected - postponing updates");
        }
    };
    
    // In real implementation, this would be registered with the monitoring service
    println!("System integration callback configured");
    
    Ok(())
}
//! System Update Examples
//! 
//! Practical examples demonstrating how to use the system update mechanisms
//! for various update scenarios and operations.

/// Basic system update example
/// 
/// This example shows how to perform a basic kernel update with proper
/// validation and rollback capabilities.
pub fn example_basic_kernel_update() {
    use crate::update::{
        system_updater::{SystemUpdater, UpdateConfig, UpdateTarget, UpdateType},
        compatibility::CompatibilityChecker,
        rollback::RollbackManager,
    };

    // 1. Configure the update system
    let config = UpdateConfig {
        enable_automatic_updates: true,
        enable_security_updates: true,
        enable_kernel_updates: true,
        backup_before_updates: true,
        require_confirmation: false,
        update_check_interval: core::time::Duration::from_secs(3600),
        max_concurrent_updates: 3,
        rollback_enabled: true,
        compatibility_check_enabled: true,
        update_timeout: core::time::Duration::from_secs(1800),
    };

    // 2. Initialize system components
    let mut updater = SystemUpdater::new(config);
    let compatibility_checker = CompatibilityChecker::new();
    let rollback_manager = RollbackManager::new(5);

    // 3. Create update target
    let kernel_update = UpdateTarget {
        update_type: UpdateType::Kernel,
        target_id: "linux-kernel".to_string(),
        version: "5.10.0".to_string(),
        target_version: "5.15.0".to_string(),
        priority: 5,
        mandatory: true,
        requires_reboot: true,
        dependencies: vec!["grub".to_string(), "initramfs".to_string()],
    };

    // 4. Validate compatibility
    let requirements = crate::update::compatibility::SystemRequirements {
        min_kernel_version: Some("5.0.0".to_string()),
        min_memory_mb: Some(1024),
        min_disk_space_mb: Some(2048),
        required_cpu_features: vec!["sse2".to_string()],
        required_drivers: vec!["virtio".to_string()],
        required_services: vec!["systemd".to_string()],
        max_incompatible_packages: vec![],
    };

    let compatibility_result = compatibility_checker.check_update_compatibility(&requirements);
    
    if !compatibility_result.compatible {
        println!("Compatibility check failed: {:?}", compatibility_result.issues);
        return;
    }

    // 5. Create safety snapshot
    let snapshot_id = rollback_manager.create_snapshot(Some("Pre-kernel update snapshot"))
        .expect("Failed to create safety snapshot");

    // 6. Queue and process the update
    let update_id = updater.queue_update(kernel_update)
        .expect("Failed to queue kernel update");

    // Process all queued updates
    let process_result = updater.process_updates();
    
    match process_result {
        Ok(_) => println!("Kernel update completed successfully: {}", update_id),
        Err(e) => {
            println!("Kernel update failed: {:?}. Initiating rollback...", e);
            let rollback_result = rollback_manager.rollback_to_snapshot(&snapshot_id);
            match rollback_result {
                Ok(_) => println!("Rollback completed successfully"),
                Err(rb_e) => println!("Rollback failed: {:?}", rb_e),
            }
        }
    }
}

/// Security patch update example
/// 
/// This example demonstrates how to handle critical security patches
/// with automatic installation and proper validation.
pub fn example_security_patch_update() {
    use crate::update::{
        system_updater::{SystemUpdater, UpdateConfig, UpdateTarget, UpdateType},
        package_integration::{PackageManager, Package, PackageDependency, VersionConstraint},
    };

    // 1. Initialize package manager
    let package_manager = PackageManager::new();

    // 2. Define security patch package
    let security_patch = Package {
        name: "openssl-security-fix".to_string(),
        version: "1.1.1k-1".to_string(),
        architecture: "x86_64".to_string(),
        description: "Critical security fix for OpenSSL vulnerability".to_string(),
        maintainer: "Security Team".to_string(),
        size_bytes: 1024 * 1024,
        dependencies: vec![
            PackageDependency {
                name: "openssl".to_string(),
                version_constraint: VersionConstraint::LessEqual("1.1.1j".to_string()),
                optional: false,
                description: Some("OpenSSL library".to_string()),
            }
        ],
        provides: vec!["openssl-security".to_string()],
        conflicts: vec![],
        replaces: vec![],
        install_size_bytes: 2 * 1024 * 1024,
        download_url: "http://security-repo.example.com/openssl-security-fix.deb".to_string(),
        checksum: "sha256:abc123".to_string(),
        signature: "gpg:def456".to_string(),
        category: crate::update::package_integration::PackageCategory::Security,
        priority: crate::update::package_integration::PackagePriority::Required,
        tags: vec!["security".to_string(), "critical".to_string()],
        homepage: Some("http://openssl.org".to_string()),
        repository: "security-updates".to_string(),
    };

    // 3. Configure security update settings
    let config = UpdateConfig {
        enable_automatic_updates: true,
        enable_security_updates: true,  // Security updates enabled
        enable_kernel_updates: false,
        backup_before_updates: true,
        require_confirmation: false,    // No confirmation for security patches
        update_check_interval: core::time::Duration::from_secs(900), // Check every 15 min for security
        max_concurrent_updates: 1,      // One at a time for security
        rollback_enabled: true,
        compatibility_check_enabled: true,
        update_timeout: core::time::Duration::from_secs(600),
    };

    let mut updater = SystemUpdater::new(config);

    // 4. Create security patch update target
    let security_update = UpdateTarget {
        update_type: UpdateType::SecurityPatch,
        target_id: security_patch.name.clone(),
        version: "1.1.1j".to_string(),
        target_version: security_patch.version.clone(),
        priority: 1,  // Highest priority
        mandatory: true,
        requires_reboot: false,
        dependencies: vec![],
    };

    // 5. Process the security update
    let update_id = updater.queue_update(security_update)
        .expect("Failed to queue security patch");

    // Install with minimal downtime
    let install_result = updater.process_updates();
    
    match install_result {
        Ok(_) => {
            println!("Security patch {} installed successfully", update_id);
            // Verify the fix is applied
            // In real implementation, would run security validation tests
        }
        Err(e) => {
            println!("Security patch installation failed: {:?}", e);
            // For critical security patches, escalation might be needed
        }
    }
}

/// Service update coordination example
/// 
/// This example shows how to coordinate service updates while maintaining
/// proper dependency handling and minimal service disruption.
pub fn example_service_update_coordination() {
    use crate::update::{
        service_management::{
            ServiceRestartManager, UpdateSequence, UpdateOperation, 
            UpdateOperationType, RestartType, UpdateScheduler, ScheduledUpdate, UpdateType
        },
        package_integration::PackageManager,
    };

    // 1. Initialize service management components
    let service_manager = ServiceRestartManager::new(3);
    let package_manager = PackageManager::new();
    let mut update_sequence = UpdateSequence::new("web-service-update".to_string());
    let scheduler = UpdateScheduler::new();

    // 2. Define service dependencies
    // Web service depends on: database -> cache -> network
    let web_service_deps = vec![
        crate::update::service_management::ServiceDependency {
            service_name: "web-service".to_string(),
            dependency_name: "database".to_string(),
            dependency_type: crate::update::service_management::DependencyType::Requires,
            required: true,
            restart_required: true,
            load_order: 3,
        },
        crate::update::service_management::ServiceDependency {
            service_name: "database".to_string(),
            dependency_name: "network".to_string(),
            dependency_type: crate::update::service_management::DependencyType::Requires,
            required: true,
            restart_required: true,
            load_order: 1,
        },
    ];

    // 3. Create update sequence for coordinated service restart
    let operations = vec![
        UpdateOperation {
            operation_id: "stop-web-service".to_string(),
            service_name: "web-service".to_string(),
            operation_type: UpdateOperationType::Stop,
            pre_conditions: vec![],
            post_conditions: vec!["database-running".to_string()],
            timeout: core::time::Duration::from_secs(30),
            rollback_required: true,
        },
        UpdateOperation {
            operation_id: "update-web-service".to_string(),
            service_name: "web-service".to_string(),
            operation_type: UpdateOperationType::Update,
            pre_conditions: vec!["web-service-stopped".to_string()],
            post_conditions: vec!["web-service-updated".to_string()],
            timeout: core::time::Duration::from_secs(120),
            rollback_required: true,
        },
        UpdateOperation {
            operation_id: "restart-web-service".to_string(),
            service_name: "web-service".to_string(),
            operation_type: UpdateOperationType::Start,
            pre_conditions: vec!["web-service-updated".to_string()],
            post_conditions: vec!["web-service-running".to_string()],
            timeout: core::time::Duration::from_secs(60),
            rollback_required: true,
        },
    ];

    // Add operations to sequence
    for operation in operations {
        update_sequence.add_operation(operation)
            .expect("Failed to add operation to sequence");
    }

    // 4. Schedule maintenance window
    let maintenance_window = crate::update::service_management::MaintenanceWindow {
        name: "Web Service Update Window".to_string(),
        start_time: 2_000_000_000, // Future timestamp
        end_time: 2_000_003_600,   // 1 hour later
        affected_services: vec!["web-service".to_string(), "database".to_string()],
        description: "Scheduled maintenance for web service update".to_string(),
    };

    let mut scheduler_mut = scheduler; // Make mutable
    scheduler_mut.add_maintenance_window(maintenance_window)
        .expect("Failed to add maintenance window");

    // 5. Schedule the update during maintenance window
    let scheduled_update = ScheduledUpdate {
        update_id: "web-service-v2.1.0".to_string(),
        service_name: "web-service".to_string(),
        update_type: UpdateType::Feature,
        scheduled_time: 2_000_000_000, // During maintenance window
        duration_estimate: core::time::Duration::from_secs(300), // 5 minutes
        dependencies: vec!["database".to_string()],
        notification_required: true,
        auto_rollback: true,
    };

    let schedule_id = scheduler_mut.schedule_update(scheduled_update)
        .expect("Failed to schedule update");

    // 6. Execute the update sequence
    let sequence_result = update_sequence.execute();
    
    match sequence_result {
        Ok(_) => {
            println!("Service update sequence completed successfully");
            println!("Update scheduled for: {}", schedule_id);
        }
        Err(e) => {
            println!("Service update sequence failed: {:?}", e);
            // Automatic rollback would be triggered by the sequence manager
        }
    }
}

/// Configuration update example
/// 
/// This example demonstrates how to handle configuration file updates
/// with backup and rollback capabilities.
pub fn example_configuration_update() {
    use crate::update::{
        system_updater::{SystemUpdater, UpdateConfig, UpdateTarget, UpdateType},
        rollback::RollbackManager,
    };

    // 1. Initialize components with configuration focus
    let config = UpdateConfig {
        enable_automatic_updates: false,  // Manual confirmation for config changes
        enable_security_updates: false,
        enable_kernel_updates: false,
        backup_before_updates: true,      // Always backup configs
        require_confirmation: true,
        update_check_interval: core::time::Duration::from_secs(86400), // Daily
        max_concurrent_updates: 1,
        rollback_enabled: true,
        compatibility_check_enabled: true,
        update_timeout: core::time::Duration::from_secs(300), // 5 min for configs
    };

    let mut updater = SystemUpdater::new(config);
    let rollback_manager = RollbackManager::new(10); // Keep more config snapshots

    // 2. Create configuration update target
    let config_update = UpdateTarget {
        update_type: UpdateType::Configuration,
        target_id: "system-network-config".to_string(),
        version: "1.0".to_string(),
        target_version: "1.1".to_string(),
        priority: 4,
        mandatory: false,  // Config updates usually optional
        requires_reboot: false,
        dependencies: vec!["network-manager".to_string()],
    };

    // 3. Create detailed configuration backup
    let backup_description = Some("Network configuration before v1.1 update".to_string());
    let config_snapshot_id = rollback_manager.create_snapshot(backup_description)
        .expect("Failed to create configuration snapshot");

    // 4. Queue configuration update
    let update_id = updater.queue_update(config_update)
        .expect("Failed to queue configuration update");

    println!("Configuration update queued: {}", update_id);
    println!("Backup snapshot created: {}", config_snapshot_id);
    println!("Manual confirmation required for configuration changes");

    // 5. Simulate user confirmation process
    let user_confirmed = true; // In real implementation, would prompt user
    
    if user_confirmed {
        let process_result = updater.process_updates();
        
        match process_result {
            Ok(_) => {
                println!("Configuration update completed: {}", update_id);
                println!("New configuration applied successfully");
                
                // Verify configuration
                let verify_result = verify_network_configuration();
                match verify_result {
                    Ok(_) => println!("Configuration verification passed"),
                    Err(e) => {
                        println!("Configuration verification failed: {:?}", e);
                        println!("Rolling back to snapshot: {}", config_snapshot_id);
                        
                        let rollback_result = rollback_manager.rollback_to_snapshot(&config_snapshot_id);
                        match rollback_result {
                            Ok(_) => println!("Configuration rollback successful"),
                            Err(rb_e) => println!("Configuration rollback failed: {:?}", rb_e),
                        }
                    }
                }
            }
            Err(e) => {
                println!("Configuration update failed: {:?}", e);
                println!("Rolling back to snapshot: {}", config_snapshot_id);
                
                let rollback_result = rollback_manager.rollback_to_snapshot(&config_snapshot_id);
                match rollback_result {
                    Ok(_) => println!("Configuration rollback successful"),
                    Err(rb_e) => println!("Configuration rollback failed: {:?}", rb_e),
                }
            }
        }
    } else {
        println!("Configuration update cancelled by user");
        // Clean up the backup snapshot as it's no longer needed
        let cleanup_result = rollback_manager.delete_snapshot(&config_snapshot_id);
        if cleanup_result.is_ok() {
            println!("Backup snapshot cleaned up");
        }
    }
}

/// Emergency update example
/// 
/// This example shows how to handle emergency updates that bypass
/// normal safety mechanisms while still maintaining minimal recovery options.
pub fn example_emergency_update() {
    use crate::update::{
        system_updater::{SystemUpdater, UpdateConfig, UpdateTarget, UpdateType},
        rollback::RollbackManager,
        service_management::{ServiceRestartManager, RestartType},
    };

    // 1. Configure for emergency updates (minimal safety, maximum speed)
    let emergency_config = UpdateConfig {
        enable_automatic_updates: true,
        enable_security_updates: true,
        enable_kernel_updates: true,
        backup_before_updates: false,  // Skip backup for speed
        require_confirmation: false,   // No confirmation in emergency
        update_check_interval: core::time::Duration::from_secs(300),
        max_concurrent_updates: 5,     // Use all resources
        rollback_enabled: true,        // Still need rollback capability
        compatibility_check_enabled: false, // Skip compatibility check for speed
        update_timeout: core::time::Duration::from_secs(600), // Extended timeout for safety
    };

    let mut updater = SystemUpdater::new(emergency_config);
    let rollback_manager = RollbackManager::new(3); // Minimal snapshots in emergency
    let service_manager = ServiceRestartManager::new(5);

    // 2. Create emergency security patch target
    let emergency_patch = UpdateTarget {
        update_type: UpdateType::SecurityPatch,
        target_id: "emergency-cve-2023-critical".to_string(),
        version: "1.0.0".to_string(),
        target_version: "1.0.1".to_string(),
        priority: 0, // Highest priority
        mandatory: true,
        requires_reboot: false,
        dependencies: vec![],
    };

    // 3. Create minimal safety snapshot (just in case)
    let minimal_snapshot_id = rollback_manager.create_snapshot(Some("Emergency patch safety snapshot"))
        .expect("Failed to create emergency snapshot");

    // 4. Force restart any conflicting services immediately
    let conflicting_services = vec!["web-server", "database", "cache-service"];
    for service in &conflicting_services {
        let restart_result = service_manager.force_restart_service(service);
        match restart_result {
            Ok(operation_id) => println!("Emergency restart initiated for {}: {}", service, operation_id),
            Err(e) => println!("Failed to restart {} during emergency: {:?}", service, e),
        }
    }

    // 5. Process emergency update immediately
    let update_id = updater.queue_update(emergency_patch)
        .expect("Failed to queue emergency patch");

    println!("EMERGENCY UPDATE IN PROGRESS: {}", update_id);
    println!("Safety snapshot: {}", minimal_snapshot_id);
    
    let emergency_result = updater.process_updates();
    
    match emergency_result {
        Ok(_) => {
            println!("EMERGENCY UPDATE COMPLETED SUCCESSFULLY: {}", update_id);
            println!("System patched and operational");
            
            // Perform post-emergency cleanup
            perform_post_emergency_cleanup(&conflicting_services);
        }
        Err(e) => {
            println!("EMERGENCY UPDATE FAILED: {:?}", e);
            println!("Attempting immediate rollback...");
            
            let rollback_result = rollback_manager.rollback_to_snapshot(&minimal_snapshot_id);
            match rollback_result {
                Ok(_) => {
                    println!("Emergency rollback successful");
                    println!("System restored to pre-emergency state");
                }
                Err(rb_e) => {
                    println!("EMERGENCY ROLLBACK FAILED: {:?}", rb_e);
                    println!("MANUAL INTERVENTION REQUIRED");
                    // In real implementation, would trigger alerts and manual intervention
                }
            }
        }
    }
}

/// Utility function to verify network configuration
fn verify_network_configuration() -> Result<(), String> {
    // Mock configuration verification
    // In real implementation, would check actual network configuration
    println!("Verifying network configuration...");
    
    // Simulate verification process
    if true {
        Ok(())
    } else {
        Err("Network configuration validation failed".to_string())
    }
}

/// Utility function for post-emergency cleanup
fn perform_post_emergency_cleanup(services: &[&str]) {
    println!("Performing post-emergency cleanup...");
    
    for service in services {
        println!("Cleaning up after emergency restart: {}", service);
        // In real implementation, would perform service health checks and cleanup
    }
    
    println!("Post-emergency cleanup completed");
}

/// Rolling update example for load-balanced services
/// 
/// This example demonstrates how to perform rolling updates across
/// multiple service instances without downtime.
pub fn example_rolling_update() {
    use crate::update::{
        service_management::{ServiceRestartManager, RestartType, UpdateSequence, UpdateOperation, UpdateOperationType},
        system_updater::{SystemUpdater, UpdateConfig},
    };

    // 1. Initialize components for rolling updates
    let service_manager = ServiceRestartManager::new(3);
    let config = UpdateConfig {
        enable_automatic_updates: true,
        enable_security_updates: true,
        enable_kernel_updates: false,
        backup_before_updates: true,
        require_confirmation: false,
        update_check_interval: core::time::Duration::from_secs(1800),
        max_concurrent_updates: 1, // One instance at a time for rolling updates
        rollback_enabled: true,
        compatibility_check_enabled: true,
        update_timeout: core::time::Duration::from_secs(900),
    };

    let updater = SystemUpdater::new(config);
    let mut rolling_sequence = UpdateSequence::new("rolling-web-cluster-update".to_string());

    // 2. Define rolling update sequence for 3 web server instances
    let instances = vec!["web-01", "web-02", "web-03"];
    let mut operations = Vec::new();

    for (index, instance) in instances.iter().enumerate() {
        // Add stop operation
        operations.push(UpdateOperation {
            operation_id: format!("stop-{}-{}", instance, index),
            service_name: instance.to_string(),
            operation_type: UpdateOperationType::Stop,
            pre_conditions: if index == 0 { vec![] } else { vec![format!("{}-healthy", instances[index-1])] },
            post_conditions: vec![format!("{}-stopped", instance)],
            timeout: core::time::Duration::from_secs(30),
            rollback_required: true,
        });

        // Add update operation
        operations.push(UpdateOperation {
            operation_id: format!("update-{}-{}", instance, index),
            service_name: instance.to_string(),
            operation_type: UpdateOperationType::Update,
            pre_conditions: vec![format!("{}-stopped", instance)],
            post_conditions: vec![format!("{}-updated", instance)],
            timeout: core::time::Duration::from_secs(120),
            rollback_required: true,
        });

        // Add start operation
        operations.push(UpdateOperation {
            operation_id: format!("start-{}-{}", instance, index),
            service_name: instance.to_string(),
            operation_type: UpdateOperationType::Start,
            pre_conditions: vec![format!("{}-updated", instance)],
            post_conditions: vec![format!("{}-healthy", instance)],
            timeout: core::time::Duration::from_secs(60),
            rollback_required: true,
        });
    }

    // Add all operations to the sequence
    for operation in operations {
        rolling_sequence.add_operation(operation)
            .expect("Failed to add rolling update operation");
    }

    println!("Starting rolling update across {} instances", instances.len());
    println!("This will maintain service availability throughout the update");

    // 3. Execute the rolling update sequence
    let sequence_result = rolling_sequence.execute();
    
    match sequence_result {
        Ok(_) => {
            println!("Rolling update completed successfully!");
            println!("All {} instances updated without service interruption", instances.len());
            
            // Verify all instances are healthy
            for instance in &instances {
                let service_state = service_manager.get_service_state(instance);
                match service_state {
                    Some(state) => {
                        if state.status == crate::update::service_management::ServiceStatus::Running {
                            println!("{}: HEALTHY", instance);
                        } else {
                            println!("{}: STATUS={:?}", instance, state.status);
                        }
                    }
                    None => println!("{}: STATE UNKNOWN", instance),
                }
            }
        }
        Err(e) => {
            println!("Rolling update failed: {:?}", e);
            println!("Cluster may be in mixed state - manual intervention recommended");
            
            // In real implementation, would implement partial rollback logic
        }
    }
}