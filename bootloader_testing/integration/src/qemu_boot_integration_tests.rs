//! QEMU Integration Tests for Bootloader
//! 
//! Tests bootloader functionality in a virtualized environment using QEMU.
//! Supports multiple architectures: x86_64, ARM64, and RISC-V.

use anyhow::{Result, Context};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::io::{Write, BufRead, BufReader};
use tempfile::{NamedTempFile, TempDir};
use serial_test::serial;

#[cfg(test)]
mod qemu_tests {
    use super::*;
    use predicates::prelude::*;
    use tokio::time::{timeout, Duration};
    use uuid::Uuid;

    const TEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// QEMU configuration for testing
    #[derive(Debug, Clone)]
    struct QemuConfig {
        pub arch: String,
        pub memory: String,
        pub cpus: u32,
        pub machine: String,
        pub boot_device: String,
        pub console_output: Option<PathBuf>,
        pub kernel_path: Option<PathBuf>,
        pub initrd_path: Option<PathBuf>,
        pub append_params: Vec<String>,
    }

    impl Default for QemuConfig {
        fn default() -> Self {
            Self {
                arch: "x86_64".to_string(),
                memory: "512M".to_string(),
                cpus: 2,
                machine: "pc".to_string(),
                boot_device: "cdrom".to_string(),
                console_output: None,
                kernel_path: None,
                initrd_path: None,
                append_params: Vec::new(),
            }
        }
    }

    /// Test bootloader boot sequence with QEMU
    #[tokio::test]
    #[serial]
    async fn test_qemu_boot_sequence() -> Result<()> {
        let config = QemuConfig::default();
        
        // Create temporary console output file
        let console_file = NamedTempFile::new()
            .context("Failed to create console output file")?;
        
        let mut qemu_cmd = build_qemu_command(&config, &console_file.path().to_path_buf())?;
        
        // Start QEMU with timeout
        let qemu_output = timeout(TEST_TIMEOUT, async {
            let mut child = qemu_cmd
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .context("Failed to start QEMU")?;

            // Wait for bootloader to output boot messages
            let stdout = child.stdout.take().unwrap();
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();
            
            // Read first few lines to verify bootloader started
            let mut boot_detected = false;
            for _ in 0..10 {
                if let Some(Ok(line)) = lines.next().await {
                    if line.contains("MultiOS Bootloader") || line.contains("Booting") {
                        boot_detected = true;
                        break;
                    }
                }
            }
            
            // Terminate QEMU gracefully
            child.kill().await.ok();
            
            Ok::<_, anyhow::Error>(boot_detected)
        }).await
        .context("QEMU boot test timed out")?;

        assert!(qemu_output?, "Bootloader boot sequence should be detected");
        Ok(())
    }

    /// Test bootloader memory management in QEMU
    #[tokio::test]
    #[serial]
    async fn test_qemu_memory_management() -> Result<()> {
        let mut config = QemuConfig::default();
        config.memory = "1G".to_string();
        config.append_params.push("memory_test=true".to_string());
        
        let console_file = NamedTempFile::new()
            .context("Failed to create console output file")?;
        
        let mut qemu_cmd = build_qemu_command(&config, &console_file.path().to_path_buf())?;
        
        // Run memory test
        let qemu_output = timeout(TEST_TIMEOUT, async {
            let mut child = qemu_cmd
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .context("Failed to start QEMU")?;

            // Read console output for memory test results
            let stdout = child.stdout.take().unwrap();
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();
            
            let mut memory_test_passed = false;
            for _ in 0..20 {
                if let Some(Ok(line)) = lines.next().await {
                    if line.contains("Memory test") && line.contains("PASSED") {
                        memory_test_passed = true;
                        break;
                    }
                }
            }
            
            child.kill().await.ok();
            Ok::<_, anyhow::Error>(memory_test_passed)
        }).await
        .context("Memory test timed out")?;

        assert!(qemu_output?, "Memory management test should pass");
        Ok(())
    }

    /// Test bootloader UEFI support
    #[tokio::test]
    #[serial]
    async fn test_qemu_uefi_support() -> Result<()> {
        let mut config = QemuConfig::default();
        config.machine = "q35".to_string();
        config.arch = "x86_64".to_string();
        config.append_params.push("uefi=true".to_string());
        
        let console_file = NamedTempFile::new()
            .context("Failed to create console output file")?;
        
        let mut qemu_cmd = build_qemu_command(&config, &console_file.path().to_path_buf())?;
        
        // Add UEFI-specific parameters
        qemu_cmd.arg("-drive").arg("if=pflash,format=raw,readonly=on,file=/usr/share/OVMF/OVMF_CODE.fd");
        
        let qemu_output = timeout(TEST_TIMEOUT, async {
            let mut child = qemu_cmd
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .context("Failed to start QEMU with UEFI")?;

            let stdout = child.stdout.take().unwrap();
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();
            
            let mut uefi_detected = false;
            for _ in 0..15 {
                if let Some(Ok(line)) = lines.next().await {
                    if line.contains("UEFI") || line.contains("EFI") {
                        uefi_detected = true;
                        break;
                    }
                }
            }
            
            child.kill().await.ok();
            Ok::<_, anyhow::Error>(uefi_detected)
        }).await
        .context("UEFI test timed out")?;

        assert!(qemu_output?, "UEFI support should be detected");
        Ok(())
    }

    /// Test bootloader console output
    #[tokio::test]
    #[serial]
    async fn test_qemu_console_output() -> Result<()> {
        let config = QemuConfig::default();
        
        let console_file = NamedTempFile::new()
            .context("Failed to create console output file")?;
        
        let mut qemu_cmd = build_qemu_command(&config, &console_file.path().to_path_buf())?;
        
        // Add serial console parameters
        qemu_cmd.arg("-serial").arg("file:").arg(console_file.path());
        
        let qemu_output = timeout(TEST_TIMEOUT, async {
            let mut child = qemu_cmd
                .stdout(Stdio::null())
                .stderr(Stdio::piped())
                .spawn()
                .context("Failed to start QEMU")?;

            // Wait a bit for bootloader to output
            tokio::time::sleep(Duration::from_secs(2)).await;
            
            child.kill().await.ok();
            Ok::<_, anyhow::Error>(())
        }).await
        .context("Console test timed out")?;

        // Check console output file for bootloader messages
        let console_content = std::fs::read_to_string(console_file.path())
            .context("Failed to read console output")?;
        
        assert!(!console_content.is_empty(), "Console output should not be empty");
        
        // Look for bootloader or boot-related messages
        assert!(
            console_content.contains("MultiOS") || 
            console_content.contains("Boot") ||
            console_content.contains("BIOS") ||
            console_content.len() > 50,
            "Console should contain meaningful boot output"
        );
        
        Ok(())
    }

    /// Test multi-architecture boot capabilities
    #[test]
    #[serial]
    fn test_multi_arch_boot_capabilities() {
        // Test x86_64 boot capability
        let x86_config = QemuConfig {
            arch: "x86_64".to_string(),
            machine: "pc".to_string(),
            ..Default::default()
        };
        
        assert!(is_qemu_available_for_arch(&x86_config.arch), 
            "QEMU should support x86_64");
        
        // Test ARM64 boot capability
        let arm_config = QemuConfig {
            arch: "aarch64".to_string(),
            machine: "virt".to_string(),
            ..Default::default()
        };
        
        assert!(is_qemu_available_for_arch(&arm_config.arch),
            "QEMU should support ARM64");
        
        // Test RISC-V boot capability
        let riscv_config = QemuConfig {
            arch: "riscv64".to_string(),
            machine: "virt".to_string(),
            ..Default::default()
        };
        
        assert!(is_qemu_available_for_arch(&riscv_config.arch),
            "QEMU should support RISC-V");
    }

    /// Test boot timeout handling
    #[tokio::test]
    #[serial]
    async fn test_boot_timeout_handling() -> Result<()> {
        let mut config = QemuConfig::default();
        config.append_params.push("timeout_test=true".to_string());
        
        let console_file = NamedTempFile::new()
            .context("Failed to create console output file")?;
        
        // Use a shorter timeout for this test
        let short_timeout = Duration::from_secs(2);
        let mut qemu_cmd = build_qemu_command(&config, &console_file.path().to_path_buf())?;
        
        let result = timeout(short_timeout, async {
            let mut child = qemu_cmd
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .context("Failed to start QEMU")?;

            // Read output briefly
            let stdout = child.stdout.take().unwrap();
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();
            
            // Read a few lines then timeout
            for _ in 0..3 {
                if let Some(Ok(_line)) = lines.next().await {
                    // Line read successfully
                } else {
                    break;
                }
            }
            
            child.kill().await.ok();
            Ok::<_, anyhow::Error>(())
        }).await;
        
        // Should timeout rather than hang indefinitely
        match result {
            Ok(_) => {
                // Test completed normally (good)
                assert!(true);
            },
            Err(_) => {
                // Timeout occurred (also acceptable for this test)
                assert!(true);
            }
        }
        
        Ok(())
    }

    // Helper functions

    /// Build QEMU command from configuration
    fn build_qemu_command(config: &QemuConfig, console_output: &Path) -> Result<Command> {
        let qemu_binary = match config.arch.as_str() {
            "x86_64" => "qemu-system-x86_64",
            "aarch64" => "qemu-system-aarch64",
            "riscv64" => "qemu-system-riscv64",
            _ => return Err(anyhow::anyhow!("Unsupported architecture: {}", config.arch)),
        };

        let mut cmd = Command::new(qemu_binary);
        
        // Basic QEMU parameters
        cmd.arg("-m").arg(&config.memory);
        cmd.arg("-smp").arg(config.cpus.to_string());
        cmd.arg("-M").arg(&config.machine);
        cmd.arg("-nographic");
        
        // Console output
        cmd.arg("-serial").arg(format!("file:{}", console_output.display()));
        
        // Boot device
        if config.boot_device == "cdrom" {
            // For testing, we'll use a dummy boot device
            cmd.arg("-device").arg("isa-serial,chardev=serial0");
        }
        
        // Kernel and initrd if provided
        if let Some(kernel_path) = &config.kernel_path {
            cmd.arg("-kernel").arg(kernel_path);
        }
        
        if let Some(initrd_path) = &config.initrd_path {
            cmd.arg("-initrd").arg(initrd_path);
        }
        
        // Append parameters
        for param in &config.append_params {
            cmd.arg("-append").arg(param);
        }
        
        Ok(cmd)
    }

    /// Check if QEMU is available for a specific architecture
    fn is_qemu_available_for_arch(arch: &str) -> bool {
        let qemu_binary = match arch {
            "x86_64" => "qemu-system-x86_64",
            "aarch64" => "qemu-system-aarch64",
            "riscv64" => "qemu-system-riscv64",
            _ => return false,
        };

        Command::new(qemu_binary)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Create a temporary test kernel image
    fn create_test_kernel() -> Result<TempDir> {
        let temp_dir = TempDir::new()
            .context("Failed to create temporary directory")?;
        
        // Create a minimal test kernel file
        let kernel_path = temp_dir.path().join("test_kernel.bin");
        std::fs::write(&kernel_path, "MINIMAL_TEST_KERNEL")
            .context("Failed to write test kernel")?;
        
        Ok(temp_dir)
    }

    /// Test error recovery scenarios
    #[tokio::test]
    #[serial]
    async fn test_error_recovery() -> Result<()> {
        let mut config = QemuConfig::default();
        config.append_params.push("error_recovery_test=true".to_string());
        
        let console_file = NamedTempFile::new()
            .context("Failed to create console output file")?;
        
        let qemu_output = timeout(TEST_TIMEOUT, async {
            let mut child = Command::new("qemu-system-x86_64")
                .arg("-m").arg("256M")
                .arg("-nographic")
                .arg("-serial").arg(format!("file:{}", console_file.path()))
                .arg("-device").arg("isa-serial,chardev=serial0")
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .context("Failed to start QEMU for error recovery test")?;

            // Read some output to verify it starts
            let stdout = child.stdout.take().unwrap();
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();
            
            // Read a few lines
            for _ in 0..5 {
                lines.next().await;
            }
            
            child.kill().await.ok();
            Ok::<_, anyhow::Error>(())
        }).await
        .context("Error recovery test timed out")?;

        assert!(qemu_output.is_ok());
        Ok(())
    }
}
