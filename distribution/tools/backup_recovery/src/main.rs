use anyhow::{Result, Context, bail};
use std::path::PathBuf;
use clap::{Parser, Subcommand, ArgGroup};
use tracing::{info, warn, error, debug};
use tracing_subscriber;

use multios_backup::backup_recovery_system::BackupRecoverySystem;
use multios_backup::types::*;

/// MultiOS Backup and Recovery System CLI
#[derive(Parser)]
#[command(name = "multios-backup")]
#[command(about = "MultiOS Backup and Recovery System")]
#[command(version = "1.0.0")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "/etc/multios/backup/config.toml")]
    config: PathBuf,
    
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
    
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new backup
    #[command(group(
        ArgGroup::new("backup_type")
            .required(true)
            .multiple(false)
    ))]
    Create {
        /// Backup type
        #[arg(short, long, group = "backup_type")]
        backup_type: Option<String>,
        
        /// Backup name
        #[arg(short, long)]
        name: Option<String>,
        
        /// Source paths to backup
        #[arg(short, long, required = true)]
        source: Vec<PathBuf>,
        
        /// Destination path
        #[arg(short, long)]
        destination: Option<PathBuf>,
        
        /// Compression algorithm
        #[arg(short, long, default_value = "zstd")]
        compression: String,
        
        /// Enable encryption
        #[arg(short, long)]
        encrypt: bool,
        
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        
        /// Verify integrity after backup
        #[arg(short, long)]
        verify: bool,
    },
    
    /// List available backups
    List {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
        
        /// Filter by backup type
        #[arg(short, long)]
        backup_type: Option<String>,
        
        /// Show only recent backups (last N days)
        #[arg(short, long)]
        recent: Option<u32>,
    },
    
    /// Restore from backup
    Restore {
        /// Backup ID or name to restore
        #[arg(short, long)]
        backup: String,
        
        /// Target path for restore
        #[arg(short, long)]
        target: PathBuf,
        
        /// Specific files to restore
        #[arg(short, long)]
        include: Vec<PathBuf>,
        
        /// Files to exclude
        #[arg(short, long)]
        exclude: Vec<PathBuf>,
        
        /// Restore permissions
        #[arg(short, long)]
        restore_permissions: bool,
        
        /// Verify after restore
        #[arg(short, long)]
        verify: bool,
        
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    
    /// Verify backup integrity
    Verify {
        /// Backup ID or name to verify
        #[arg(short, long)]
        backup: String,
        
        /// Quick verification (fast check only)
        #[arg(short, long)]
        quick: bool,
        
        /// Repair damaged files if possible
        #[arg(short, long)]
        repair: bool,
    },
    
    /// Schedule management
    Schedule {
        #[command(subcommand)]
        subcommand: ScheduleCommands,
    },
    
    /// Storage management
    Storage {
        #[command(subcommand)]
        subcommand: StorageCommands,
    },
    
    /// Quick restore operations
    Quick {
        #[command(subcommand)]
        subcommand: QuickCommands,
    },
    
    /// Create bootable recovery media
    RecoveryMedia {
        /// Media name
        #[arg(short, long, default_value = "multios-recovery")]
        name: String,
        
        /// Create bootable USB (requires --device)
        #[arg(short, long)]
        usb: bool,
        
        /// USB device path (required for --usb)
        #[arg(short, long)]
        device: Option<String>,
        
        /// Include specific backups
        #[arg(short, long)]
        include_backup: Vec<String>,
        
        /// Output directory
        #[arg(short, long, default_value = "/var/lib/multios/backup/media")]
        output: PathBuf,
    },
    
    /// System status and information
    Status {
        /// Show detailed status
        #[arg(short, long)]
        detailed: bool,
        
        /// Show only backup jobs
        #[arg(short, long)]
        jobs: bool,
        
        /// Show only storage information
        #[arg(short, long)]
        storage: bool,
    },
    
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ScheduleCommands {
    /// List all schedules
    List,
    
    /// Add a new schedule
    Add {
        /// Schedule name
        name: String,
        
        /// Cron expression (e.g., "0 2 * * *")
        cron: String,
        
        /// Backup specification name
        backup_spec: String,
        
        /// Enable schedule
        #[arg(short, long)]
        enable: bool,
    },
    
    /// Remove a schedule
    Remove {
        /// Schedule name
        name: String,
    },
    
    /// Enable a schedule
    Enable {
        /// Schedule name
        name: String,
    },
    
    /// Disable a schedule
    Disable {
        /// Schedule name
        name: String,
    },
}

#[derive(Subcommand)]
enum StorageCommands {
    /// List storage locations
    List,
    
    /// Test connectivity
    Test {
        /// Storage location ID
        location: String,
    },
    
    /// Add storage location
    Add {
        /// Storage type
        storage_type: String,
        
        /// Storage path or URL
        path: String,
        
        /// Set as default
        #[arg(short, long)]
        default: bool,
    },
    
    /// Remove storage location
    Remove {
        /// Storage location ID
        location: String,
    },
}

#[derive(Subcommand)]
enum QuickCommands {
    /// Restore corrupted system files
    SystemFiles {
        /// Target location
        #[arg(short, long)]
        target: PathBuf,
        
        /// Force overwrite
        #[arg(short, long)]
        force: bool,
    },
    
    /// Restore driver files
    Drivers {
        /// Target location
        #[arg(short, long)]
        target: PathBuf,
        
        /// Force overwrite
        #[arg(short, long)]
        force: bool,
    },
    
    /// Restore user documents
    UserDocuments {
        /// Target location
        #[arg(short, long)]
        target: PathBuf,
        
        /// Force overwrite
        #[arg(short, long)]
        force: bool,
    },
    
    /// Restore application data
    ApplicationData {
        /// Target location
        #[arg(short, long)]
        target: PathBuf,
        
        /// Force overwrite
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    
    /// Edit configuration
    Edit,
    
    /// Reset to defaults
    Reset,
    
    /// Validate configuration
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    
    // Setup logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
    
    info!("MultiOS Backup System v1.0.0 starting...");
    
    // Initialize backup system
    let backup_system = BackupRecoverySystem::new(&cli.config).await?;
    
    // Execute command
    match cli.command {
        Commands::Create { backup_type, name, source, destination, compression, encrypt, description, verify } => {
            handle_create(&backup_system, backup_type, name, source, destination, compression, encrypt, description, verify).await?;
        }
        Commands::List { detailed, backup_type, recent } => {
            handle_list(&backup_system, detailed, backup_type, recent).await?;
        }
        Commands::Restore { backup, target, include, exclude, restore_permissions, verify, force } => {
            handle_restore(&backup_system, backup, target, include, exclude, restore_permissions, verify, force).await?;
        }
        Commands::Verify { backup, quick, repair } => {
            handle_verify(&backup_system, backup, quick, repair).await?;
        }
        Commands::Schedule { subcommand } => {
            handle_schedule(&backup_system, subcommand).await?;
        }
        Commands::Storage { subcommand } => {
            handle_storage(&backup_system, subcommand).await?;
        }
        Commands::Quick { subcommand } => {
            handle_quick(&backup_system, subcommand).await?;
        }
        Commands::RecoveryMedia { name, usb, device, include_backup, output } => {
            handle_recovery_media(&backup_system, name, usb, device, include_backup, output).await?;
        }
        Commands::Status { detailed, jobs, storage } => {
            handle_status(&backup_system, detailed, jobs, storage).await?;
        }
        Commands::Config { subcommand } => {
            handle_config(&backup_system, subcommand).await?;
        }
    }
    
    info!("MultiOS Backup System completed successfully");
    Ok(())
}

async fn handle_create(
    backup_system: &BackupSystem,
    backup_type: Option<String>,
    name: Option<String>,
    source: Vec<PathBuf>,
    destination: Option<PathBuf>,
    compression: String,
    encrypt: bool,
    description: Option<String>,
    verify: bool,
) -> Result<()> {
    info!("Creating backup...");
    
    let backup_type_enum = match backup_type.as_deref() {
        Some("full") => BackupType::Full,
        Some("incremental") => BackupType::Incremental,
        Some("differential") => BackupType::Differential,
        Some("file") => BackupType::FileLevel,
        Some("partition") => BackupType::PartitionLevel,
        None => BackupType::Full,
        Some(other) => bail!("Unknown backup type: {}", other),
    };
    
    let compression_enum = match compression.as_str() {
        "none" => CompressionAlgorithm::None,
        "gzip" => CompressionAlgorithm::Gzip,
        "lz4" => CompressionAlgorithm::Lz4,
        "zstd" => CompressionAlgorithm::Zstd,
        other => bail!("Unknown compression algorithm: {}", other),
    };
    
    let backup_spec = BackupSpecification {
        job_id: uuid::Uuid::new_v4(),
        name: name.unwrap_or_else(|| format!("backup_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))),
        backup_type: backup_type_enum,
        sources: source,
        destination: StorageLocation {
            id: "local-default".to_string(),
            storage_type: StorageType::Local,
            path: destination.map(|p| p.to_string_lossy().to_string()).unwrap_or_else(|| "/var/lib/multios/backup".to_string()),
            config: HashMap::new(),
            is_default: true,
        },
        compression: compression_enum,
        encryption: EncryptionSettings {
            enabled: encrypt,
            algorithm: "AES-256".to_string(),
            key_derivation: "PBKDF2".to_string(),
            salt: None,
        },
        description,
        tags: HashMap::new(),
        verify_integrity: verify,
        create_recovery_media: false,
    };
    
    let job = backup_system.create_backup(backup_spec).await?;
    backup_system.start_backup(&job.job_id).await?;
    
    println!("Backup job created: {}", job.job_id);
    println!("Status: {:?}", job.status);
    println!("Progress: {}%", job.progress);
    
    Ok(())
}

async fn handle_list(
    backup_system: &BackupSystem,
    detailed: bool,
    backup_type: Option<String>,
    recent: Option<u32>,
) -> Result<()> {
    info!("Listing backups...");
    
    let backups = backup_system.list_backups().await?;
    
    for backup in backups {
        // Filter by type if specified
        if let Some(ref filter_type) = backup_type {
            if format!("{:?}", backup.specification.backup_type) != *filter_type {
                continue;
            }
        }
        
        // Filter by recent if specified
        if let Some(days) = recent {
            let cutoff = chrono::Utc::now() - chrono::Duration::days(days as i64);
            if backup.created_at < cutoff {
                continue;
            }
        }
        
        if detailed {
            println!("Backup ID: {}", backup.job_id);
            println!("  Name: {}", backup.specification.name);
            println!("  Type: {:?}", backup.specification.backup_type);
            println!("  Status: {:?}", backup.status);
            println!("  Created: {}", backup.created_at);
            println!("  Size: {} bytes", backup.size_bytes);
            println!("  Files: {}", backup.files_processed);
            if let Some(ref desc) = backup.specification.description {
                println!("  Description: {}", desc);
            }
            println!();
        } else {
            println!("{}  {}  {}  {:?}", 
                backup.job_id,
                backup.specification.name,
                backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                backup.specification.backup_type);
        }
    }
    
    Ok(())
}

async fn handle_restore(
    backup_system: &BackupSystem,
    backup: String,
    target: PathBuf,
    include: Vec<PathBuf>,
    exclude: Vec<PathBuf>,
    restore_permissions: bool,
    verify: bool,
    force: bool,
) -> Result<()> {
    info!("Restoring backup: {}", backup);
    
    let restore_spec = RestoreSpecification {
        job_id: uuid::Uuid::new_v4(),
        backup_id: backup,
        target_path: target,
        include_paths: include,
        exclude_paths: exclude,
        point_in_time: None,
        verify_restore: verify,
        restore_permissions,
        restore_ownership: true,
    };
    
    let job = backup_system.restore_backup(restore_spec).await?;
    backup_system.start_restore(&job.job_id).await?;
    
    println!("Restore job created: {}", job.job_id);
    println!("Status: {:?}", job.status);
    
    Ok(())
}

async fn handle_verify(
    backup_system: &BackupSystem,
    backup: String,
    quick: bool,
    repair: bool,
) -> Result<()> {
    info!("Verifying backup: {}", backup);
    
    let result = if quick {
        backup_system.verify_backup(&backup).await?
    } else {
        // Full verification would be implemented here
        backup_system.verify_backup(&backup).await?
    };
    
    println!("Backup verification result:");
    println!("  Backup ID: {}", result.backup_id);
    println!("  Status: {:?}", result.status);
    println!("  Verified at: {}", result.verified_at);
    println!("  Files verified: {}", result.files_verified);
    println!("  Files failed: {}", result.files_failed);
    println!("  Assessment: {}", result.assessment);
    
    if !result.integrity_checks.is_empty() {
        println!("  Integrity checks:");
        for check in &result.integrity_checks {
            println!("    {}: {:?} - {}", check.check_type, check.status, check.details);
        }
    }
    
    if repair && result.status == VerificationStatus::Failed {
        println!("  Note: Repair functionality not yet implemented");
    }
    
    Ok(())
}

async fn handle_schedule(
    backup_system: &BackupSystem,
    subcommand: ScheduleCommands,
) -> Result<()> {
    match subcommand {
        ScheduleCommands::List => {
            // List schedules implementation
            println!("Schedule management not yet fully implemented");
        }
        ScheduleCommands::Add { name, cron, backup_spec, enable } => {
            // Add schedule implementation
            println!("Schedule management not yet fully implemented");
        }
        ScheduleCommands::Remove { name } => {
            // Remove schedule implementation
            println!("Schedule management not yet fully implemented");
        }
        ScheduleCommands::Enable { name } => {
            // Enable schedule implementation
            println!("Schedule management not yet fully implemented");
        }
        ScheduleCommands::Disable { name } => {
            // Disable schedule implementation
            println!("Schedule management not yet fully implemented");
        }
    }
    
    Ok(())
}

async fn handle_storage(
    backup_system: &BackupSystem,
    subcommand: StorageCommands,
) -> Result<()> {
    match subcommand {
        StorageCommands::List => {
            // List storage implementation
            println!("Storage management not yet fully implemented");
        }
        StorageCommands::Test { location } => {
            // Test storage implementation
            println!("Storage management not yet fully implemented");
        }
        StorageCommands::Add { storage_type, path, default } => {
            // Add storage implementation
            println!("Storage management not yet fully implemented");
        }
        StorageCommands::Remove { location } => {
            // Remove storage implementation
            println!("Storage management not yet fully implemented");
        }
    }
    
    Ok(())
}

async fn handle_quick(
    backup_system: &BackupSystem,
    subcommand: QuickCommands,
) -> Result<()> {
    match subcommand {
        QuickCommands::SystemFiles { target, force } => {
            println!("Quick restore for system files not yet fully implemented");
        }
        QuickCommands::Drivers { target, force } => {
            println!("Quick restore for drivers not yet fully implemented");
        }
        QuickCommands::UserDocuments { target, force } => {
            println!("Quick restore for user documents not yet fully implemented");
        }
        QuickCommands::ApplicationData { target, force } => {
            println!("Quick restore for application data not yet fully implemented");
        }
    }
    
    Ok(())
}

async fn handle_recovery_media(
    backup_system: &BackupSystem,
    name: String,
    usb: bool,
    device: Option<String>,
    include_backup: Vec<String>,
    output: PathBuf,
) -> Result<()> {
    info!("Creating recovery media: {}", name);
    
    if usb && device.is_none() {
        bail!("USB device path required when using --usb");
    }
    
    let config = RecoveryMediaConfig {
        name,
        description: "MultiOS Recovery Media".to_string(),
        include_backups: if include_backup.is_empty() { None } else { Some(include_backup) },
        create_usb: usb,
        usb_device: device,
        auto_detect: true,
        network_enabled: true,
        ssh_enabled: true,
        default_backup_destination: "/var/lib/multios/backup".to_string(),
        compression_algorithm: "zstd".to_string(),
        encryption_enabled: false,
        boot_timeout: 30,
        default_menu: "main".to_string(),
    };
    
    println!("Recovery media creation not yet fully implemented");
    
    Ok(())
}

async fn handle_status(
    backup_system: &BackupSystem,
    detailed: bool,
    jobs: bool,
    storage: bool,
) -> Result<()> {
    let status = backup_system.get_status().await?;
    
    if detailed {
        println!("System Status:");
        println!("  Version: {}", status.version);
        println!("  Uptime: {:?}", status.uptime);
        println!("  Config Version: {}", status.config_version);
        println!("  Active Backups: {}", status.active_backups);
        println!("  Active Restores: {}", status.active_restores);
    } else if jobs {
        println!("Active Jobs:");
        println!("  Backups: {}", status.active_backups);
        println!("  Restores: {}", status.active_restores);
    } else if storage {
        println!("Storage Information:");
        println!("  Default storage: /var/lib/multios/backup");
    } else {
        println!("MultiOS Backup System Status");
        println!("Active Jobs: {} backups, {} restores", status.active_backups, status.active_restores);
    }
    
    Ok(())
}

async fn handle_config(
    backup_system: &BackupSystem,
    subcommand: ConfigCommands,
) -> Result<()> {
    match subcommand {
        ConfigCommands::Show => {
            println!("Configuration management not yet fully implemented");
        }
        ConfigCommands::Edit => {
            println!("Configuration management not yet fully implemented");
        }
        ConfigCommands::Reset => {
            println!("Configuration management not yet fully implemented");
        }
        ConfigCommands::Validate => {
            println!("Configuration management not yet fully implemented");
        }
    }
    
    Ok(())
}

// Placeholder type alias
type BackupSystem = BackupRecoverySystem;