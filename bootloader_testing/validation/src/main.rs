//! Bootloader Validation Tool
//! 
//! Comprehensive tool for validating bootloader functionality across
//! multiple architectures and environments.

use anyhow::{Result, Context};
use chrono::{DateTime, Utc, Local};
use clap::{Parser, Subcommand, Arg};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::process::Command;
use uuid::Uuid;

#[derive(Debug, Clone, Parser)]
#[command(name = "boot_validator")]
#[command(about = "MultiOS Bootloader Validation Tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output directory for test results
    #[arg(short, long, default_value = "./validation_results")]
    output_dir: PathBuf,

    /// Architecture to test (x86_64, aarch64, riscv64)
    #[arg(short, long, default_value = "x86_64")]
    architecture: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run complete validation suite
    Validate {
        /// Path to bootloader binary
        bootloader_path: PathBuf,
        
        /// Path to kernel binary
        kernel_path: PathBuf,
        
        /// Test configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Test specific boot mode
    TestMode {
        /// Boot mode to test (uefi, legacy, both)
        mode: String,
        bootloader_path: PathBuf,
        kernel_path: PathBuf,
    },

    /// Test memory management
    TestMemory {
        bootloader_path: PathBuf,
        kernel_path: PathBuf,
        memory_size: String,
    },

    /// Test performance
    TestPerformance {
        bootloader_path: PathBuf,
        kernel_path: PathBuf,
        
        /// Number of iterations
        #[arg(short, long, default_value = "10")]
        iterations: usize,
    },

    /// Generate validation report
    Report {
        /// Path to validation results directory
        results_dir: PathBuf,
        
        /// Output file path
        #[arg(short, long, default_value = "validation_report.html")]
        output_file: PathBuf,
    },
}

/// Test result structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    pub test_name: String,
    pub architecture: String,
    pub boot_mode: String,
    pub status: TestStatus,
    pub duration_ms: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub output: Option<String>,
    pub error_message: Option<String>,
    pub performance_metrics: Option<PerformanceMetrics>,
}

/// Test execution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
    Timeout,
}

/// Performance metrics captured during testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub boot_time_ms: u64,
    pub memory_used_kb: u64,
    pub serial_output_lines: usize,
    pub qemu_exit_code: Option<i32>,
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub timeout_seconds: u64,
    pub memory_size: String,
    pub cpu_count: u32,
    pub console_output: bool,
    pub qemu_args: Vec<String>,
}

/// Main application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    // Create output directory
    fs::create_dir_all(&cli.output_dir)
        .context("Failed to create output directory")?;

    info!("Starting MultiOS Bootloader Validation Tool");
    info!("Architecture: {}", cli.architecture);
    info!("Output directory: {}", cli.output_dir.display());

    let result = match cli.command {
        Commands::Validate { bootloader_path, kernel_path, config } => {
            run_validation_suite(bootloader_path, kernel_path, config, &cli).await
        }
        Commands::TestMode { mode, bootloader_path, kernel_path } => {
            test_boot_mode(mode, bootloader_path, kernel_path, &cli).await
        }
        Commands::TestMemory { bootloader_path, kernel_path, memory_size } => {
            test_memory_management(bootloader_path, kernel_path, memory_size, &cli).await
        }
        Commands::TestPerformance { bootloader_path, kernel_path, iterations } => {
            test_performance(bootloader_path, kernel_path, iterations, &cli).await
        }
        Commands::Report { results_dir, output_file } => {
            generate_report(results_dir, output_file).await
        }
    };

    match result {
        Ok(_) => {
            info!("Validation completed successfully");
            std::process::exit(0);
        }
        Err(e) => {
            error!("Validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize logging subsystem
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    flexi_logger::Logger::try_with_str("boot_validator")?
        .log_level(level)
        .start()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Run complete validation suite
async fn run_validation_suite(
    bootloader_path: PathBuf,
    kernel_path: PathBuf,
    config_path: Option<PathBuf>,
    cli: &Cli,
) -> Result<()> {
    info!("Starting validation suite");

    // Load configuration
    let config = load_config(config_path, cli)?;

    let mut results = Vec::new();

    // Test boot modes
    for mode in ["uefi", "legacy"] {
        info!("Testing boot mode: {}", mode);
        let result = test_boot_mode(mode.to_string(), bootloader_path.clone(), kernel_path.clone(), cli).await?;
        results.push(result);
    }

    // Test memory management
    info!("Testing memory management");
    let result = test_memory_management(
        bootloader_path.clone(),
        kernel_path.clone(),
        config.memory_size.clone(),
        cli
    ).await?;
    results.push(result);

    // Test performance
    info!("Testing performance");
    let result = test_performance(
        bootloader_path.clone(),
        kernel_path.clone(),
        5, // Reduced iterations for validation suite
        cli
    ).await?;
    results.push(result);

    // Save results
    save_results(&results, &cli.output_dir)?;

    Ok(())
}

/// Test specific boot mode
async fn test_boot_mode(
    mode: String,
    bootloader_path: PathBuf,
    kernel_path: PathBuf,
    cli: &Cli,
) -> Result<TestResult> {
    let start_time = Utc::now();
    let test_id = Uuid::new_v4();

    info!("Testing boot mode: {} (ID: {})", mode, test_id);

    // Validate inputs
    if !bootloader_path.exists() {
        return Ok(TestResult {
            id: test_id,
            test_name: format!("Boot Mode Test - {}", mode),
            architecture: cli.architecture.clone(),
            boot_mode: mode.clone(),
            status: TestStatus::Fail,
            duration_ms: 0,
            start_time,
            end_time: Utc::now(),
            output: None,
            error_message: Some(format!("Bootloader not found at: {:?}", bootloader_path)),
            performance_metrics: None,
        });
    }

    if !kernel_path.exists() {
        return Ok(TestResult {
            id: test_id,
            test_name: format!("Boot Mode Test - {}", mode),
            architecture: cli.architecture.clone(),
            boot_mode: mode.clone(),
            status: TestStatus::Fail,
            duration_ms: 0,
            start_time,
            end_time: Utc::now(),
            output: None,
            error_message: Some(format!("Kernel not found at: {:?}", kernel_path)),
            performance_metrics: None,
        });
    }

    // Build QEMU command for the architecture
    let qemu_cmd = build_qemu_command(
        &cli.architecture,
        &bootloader_path,
        &kernel_path,
        &mode,
        "512M",
    )?;

    // Run test with timeout
    let timeout_duration = Duration::from_secs(30);
    let test_result = tokio::time::timeout(timeout_duration, async {
        run_boot_test(qemu_cmd, &mode).await
    }).await;

    let end_time = Utc::now();
    let duration = end_time.duration_since(start_time).unwrap();
    let duration_ms = duration.as_millis() as u64;

    match test_result {
        Ok(Ok(output)) => {
            // Test passed
            Ok(TestResult {
                id: test_id,
                test_name: format!("Boot Mode Test - {}", mode),
                architecture: cli.architecture.clone(),
                boot_mode: mode.clone(),
                status: TestStatus::Pass,
                duration_ms,
                start_time,
                end_time,
                output: Some(output),
                error_message: None,
                performance_metrics: Some(PerformanceMetrics {
                    boot_time_ms: duration_ms,
                    memory_used_kb: 0,
                    serial_output_lines: 0,
                    qemu_exit_code: None,
                }),
            })
        }
        Ok(Err(e)) => {
            // Test failed
            Ok(TestResult {
                id: test_id,
                test_name: format!("Boot Mode Test - {}", mode),
                architecture: cli.architecture.clone(),
                boot_mode: mode.clone(),
                status: TestStatus::Fail,
                duration_ms,
                start_time,
                end_time,
                output: None,
                error_message: Some(e.to_string()),
                performance_metrics: None,
            })
        }
        Err(_) => {
            // Timeout
            Ok(TestResult {
                id: test_id,
                test_name: format!("Boot Mode Test - {}", mode),
                architecture: cli.architecture.clone(),
                boot_mode: mode.clone(),
                status: TestStatus::Timeout,
                duration_ms,
                start_time,
                end_time,
                output: None,
                error_message: Some("Test timed out".to_string()),
                performance_metrics: None,
            })
        }
    }
}

/// Test memory management
async fn test_memory_management(
    bootloader_path: PathBuf,
    kernel_path: PathBuf,
    memory_size: String,
    cli: &Cli,
) -> Result<TestResult> {
    let start_time = Utc::now();
    let test_id = Uuid::new_v4();

    info!("Testing memory management with {} (ID: {})", memory_size, test_id);

    let qemu_cmd = build_qemu_command(
        &cli.architecture,
        &bootloader_path,
        &kernel_path,
        "uefi",
        &memory_size,
    )?;

    let timeout_duration = Duration::from_secs(20);
    let test_result = tokio::time::timeout(timeout_duration, async {
        run_boot_test(qemu_cmd, "memory_test").await
    }).await;

    let end_time = Utc::now();
    let duration = end_time.duration_since(start_time).unwrap();
    let duration_ms = duration.as_millis() as u64;

    match test_result {
        Ok(Ok(output)) => {
            Ok(TestResult {
                id: test_id,
                test_name: "Memory Management Test".to_string(),
                architecture: cli.architecture.clone(),
                boot_mode: "uefi".to_string(),
                status: TestStatus::Pass,
                duration_ms,
                start_time,
                end_time,
                output: Some(output),
                error_message: None,
                performance_metrics: Some(PerformanceMetrics {
                    boot_time_ms: duration_ms,
                    memory_used_kb: memory_size.parse().unwrap_or(0) / 1024,
                    serial_output_lines: output.lines().count(),
                    qemu_exit_code: None,
                }),
            })
        }
        Ok(Err(e)) => {
            Ok(TestResult {
                id: test_id,
                test_name: "Memory Management Test".to_string(),
                architecture: cli.architecture.clone(),
                boot_mode: "uefi".to_string(),
                status: TestStatus::Fail,
                duration_ms,
                start_time,
                end_time,
                output: None,
                error_message: Some(e.to_string()),
                performance_metrics: None,
            })
        }
        Err(_) => {
            Ok(TestResult {
                id: test_id,
                test_name: "Memory Management Test".to_string(),
                architecture: cli.architecture.clone(),
                boot_mode: "uefi".to_string(),
                status: TestStatus::Timeout,
                duration_ms,
                start_time,
                end_time,
                output: None,
                error_message: Some("Test timed out".to_string()),
                performance_metrics: None,
            })
        }
    }
}

/// Test performance
async fn test_performance(
    bootloader_path: PathBuf,
    kernel_path: PathBuf,
    iterations: usize,
    cli: &Cli,
) -> Result<TestResult> {
    let start_time = Utc::now();
    let test_id = Uuid::new_v4();

    info!("Testing performance with {} iterations (ID: {})", iterations, test_id);

    let mut durations = Vec::new();
    let mut outputs = Vec::new();

    for i in 0..iterations {
        info!("Performance test iteration {}/{}", i + 1, iterations);

        let iteration_start = Utc::now();
        let qemu_cmd = build_qemu_command(
            &cli.architecture,
            &bootloader_path,
            &kernel_path,
            "uefi",
            "512M",
        )?;

        let timeout_duration = Duration::from_secs(15);
        let test_result = tokio::time::timeout(timeout_duration, async {
            run_boot_test(qemu_cmd, &format!("iteration_{}", i)).await
        }).await;

        let iteration_end = Utc::now();
        let iteration_duration = iteration_end.duration_since(iteration_start).unwrap();
        durations.push(iteration_duration.as_millis() as u64);

        match test_result {
            Ok(Ok(output)) => {
                outputs.push(format!("Iteration {}: PASSED", i + 1));
            }
            Ok(Err(e)) => {
                outputs.push(format!("Iteration {}: FAILED - {}", i + 1, e));
            }
            Err(_) => {
                outputs.push(format!("Iteration {}: TIMEOUT", i + 1));
            }
        }
    }

    let end_time = Utc::now();
    let total_duration = end_time.duration_since(start_time).unwrap();
    let total_duration_ms = total_duration.as_millis() as u64;

    let average_duration = durations.iter().sum::<u64>() / durations.len() as u64;
    let min_duration = durations.iter().min().unwrap_or(&0);
    let max_duration = durations.iter().max().unwrap_or(&0);

    let output_summary = outputs.join("\n");
    let performance_data = format!(
        "Performance Summary:\nAverage: {}ms\nMin: {}ms\nMax: {}ms\nTotal: {}ms",
        average_duration, min_duration, max_duration, total_duration_ms
    );

    Ok(TestResult {
        id: test_id,
        test_name: "Performance Test".to_string(),
        architecture: cli.architecture.clone(),
        boot_mode: "uefi".to_string(),
        status: TestStatus::Pass,
        duration_ms: total_duration_ms,
        start_time,
        end_time,
        output: Some(format!("{}\n\n{}", output_summary, performance_data)),
        error_message: None,
        performance_metrics: Some(PerformanceMetrics {
            boot_time_ms: average_duration,
            memory_used_kb: 512 * 1024, // 512MB in KB
            serial_output_lines: outputs.len(),
            qemu_exit_code: None,
        }),
    })
}

/// Build QEMU command for testing
fn build_qemu_command(
    architecture: &str,
    bootloader_path: &Path,
    kernel_path: &Path,
    boot_mode: &str,
    memory_size: &str,
) -> Result<tokio::process::Command> {
    let qemu_binary = match architecture {
        "x86_64" => "qemu-system-x86_64",
        "aarch64" => "qemu-system-aarch64",
        "riscv64" => "qemu-system-riscv64",
        _ => return Err(anyhow::anyhow!("Unsupported architecture: {}", architecture)),
    };

    let mut cmd = Command::new(qemu_binary);
    
    // Basic parameters
    cmd.arg("-m").arg(memory_size);
    cmd.arg("-smp").arg("2");
    cmd.arg("-nographic");
    
    // Architecture-specific machine
    let machine = match architecture {
        "x86_64" => "pc",
        "aarch64" => "virt",
        "riscv64" => "virt",
        _ => "unknown",
    };
    cmd.arg("-M").arg(machine);
    
    // Boot files
    cmd.arg("-kernel").arg(kernel_path);
    
    // Additional boot parameters
    cmd.arg("-append").arg(format!("boot_mode={} verbose", boot_mode));
    
    // Create a temporary console output file
    let console_file = format!("console_{}_{}.log", boot_mode, std::process::id());
    cmd.arg("-serial").arg(format!("file:{}", console_file));
    
    Ok(cmd)
}

/// Run a single boot test
async fn run_boot_test(mut cmd: tokio::process::Command, test_name: &str) -> Result<String> {
    info!("Running boot test: {}", test_name);

    let output = cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()
        .await
        .context("Failed to execute QEMU command")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    
    if output.status.success() {
        Ok(format!("STDOUT:\n{}\n\nSTDERR:\n{}", stdout, stderr))
    } else {
        Err(anyhow::anyhow!(
            "QEMU command failed with status {}:\n{}",
            output.status,
            stderr
        ))
    }
}

/// Load configuration file
fn load_config(config_path: Option<PathBuf>, cli: &Cli) -> Result<ValidationConfig> {
    let mut config = ValidationConfig {
        timeout_seconds: 30,
        memory_size: "512M".to_string(),
        cpu_count: 2,
        console_output: true,
        qemu_args: Vec::new(),
    };

    if let Some(path) = config_path {
        if path.exists() {
            let config_str = fs::read_to_string(&path)
                .context("Failed to read configuration file")?;
            let file_config: ValidationConfig = serde_json::from_str(&config_str)
                .context("Failed to parse configuration file")?;
            config = file_config;
        }
    }

    Ok(config)
}

/// Save test results to files
fn save_results(results: &[TestResult], output_dir: &Path) -> Result<()> {
    // Save individual results
    for result in results {
        let filename = format!("{}_{}.json", result.test_name, result.id);
        let filepath = output_dir.join(&filename);
        
        let json = serde_json::to_string_pretty(result)
            .context("Failed to serialize test result")?;
        
        fs::write(&filepath, json)
            .context("Failed to write test result")?;
    }

    // Save summary
    let summary_filename = format!("test_summary_{}.json", Utc::now().format("%Y%m%d_%H%M%S"));
    let summary_filepath = output_dir.join(&summary_filename);
    
    let summary = serde_json::to_string_pretty(results)
        .context("Failed to serialize test summary")?;
    
    fs::write(&summary_filepath, summary)
        .context("Failed to write test summary")?;

    info!("Test results saved to: {}", output_dir.display());
    Ok(())
}

/// Generate HTML report from validation results
async fn generate_report(results_dir: PathBuf, output_file: PathBuf) -> Result<()> {
    info!("Generating validation report");

    if !results_dir.exists() {
        return Err(anyhow::anyhow!("Results directory not found: {:?}", results_dir));
    }

    // Read all result files
    let mut results = Vec::new();
    let entries = fs::read_dir(&results_dir)
        .context("Failed to read results directory")?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if path.extension().map_or(false, |ext| ext == "json") {
            let content = fs::read_to_string(&path)
                .context("Failed to read result file")?;
            
            let result: TestResult = serde_json::from_str(&content)
                .context("Failed to parse result file")?;
            
            results.push(result);
        }
    }

    // Generate HTML report
    let html = generate_html_report(&results);
    
    fs::write(&output_file, html)
        .context("Failed to write report file")?;

    info!("Validation report generated: {:?}", output_file);
    Ok(())
}

/// Generate HTML report from test results
fn generate_html_report(results: &[TestResult]) -> String {
    let pass_count = results.iter().filter(|r| matches!(r.status, TestStatus::Pass)).count();
    let fail_count = results.iter().filter(|r| matches!(r.status, TestStatus::Fail)).count();
    let skip_count = results.iter().filter(|r| matches!(r.status, TestStatus::Skip)).count();
    let timeout_count = results.iter().filter(|r| matches!(r.status, TestStatus::Timeout)).count();

    let mut html = String::new();
    
    html.push_str(r#"<!DOCTYPE html>
<html>
<head>
    <title>MultiOS Bootloader Validation Report</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        .header { background-color: #f0f0f0; padding: 20px; border-radius: 5px; }
        .summary { margin: 20px 0; }
        .summary div { margin: 5px 0; }
        .pass { color: green; }
        .fail { color: red; }
        .skip { color: orange; }
        .timeout { color: purple; }
        .test-result { margin: 10px 0; padding: 10px; border: 1px solid #ddd; border-radius: 3px; }
        .status { font-weight: bold; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
    </style>
</head>
<body>
    <div class="header">
        <h1>MultiOS Bootloader Validation Report</h1>
        <p>Generated on: {}</p>
    </div>
    
    <div class="summary">
        <h2>Test Summary</h2>
        <div>Total Tests: {}</div>
        <div class="pass">Passed: {}</div>
        <div class="fail">Failed: {}</div>
        <div class="skip">Skipped: {}</div>
        <div class="timeout">Timeout: {}</div>
    </div>
    
    <h2>Detailed Results</h2>
    <table>
        <tr>
            <th>Test Name</th>
            <th>Architecture</th>
            <th>Boot Mode</th>
            <th>Status</th>
            <th>Duration (ms)</th>
            <th>Start Time</th>
        </tr>
"#);

    // Add test result rows
    for result in results {
        let status_class = match result.status {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail", 
            TestStatus::Skip => "skip",
            TestStatus::Timeout => "timeout",
        };

        let status_text = match result.status {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
            TestStatus::Skip => "SKIP", 
            TestStatus::Timeout => "TIMEOUT",
        };

        html.push_str(&format!(
            r#"        <tr>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td class="{}">{}</td>
            <td>{}</td>
            <td>{}</td>
        </tr>
"#,
            result.test_name,
            result.architecture,
            result.boot_mode,
            status_class,
            status_text,
            result.duration_ms,
            result.start_time.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    html.push_str(r#"
    </table>
</body>
</html>
"#);

    html.replace("{}", &Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
        .replace("{}", &results.len().to_string())
        .replace("{}", &pass_count.to_string())
        .replace("{}", &fail_count.to_string())
        .replace("{}", &skip_count.to_string())
        .replace("{}", &timeout_count.to_string())
}

/// Global logging macros
macro_rules! info {
    ($($arg:tt)*) => (log::info!($($arg)*));
}

macro_rules! warn {
    ($($arg:tt)*) => (log::warn!($($arg)*));
}

macro_rules! error {
    ($($arg:tt)*) => (log::error!($($arg)*));
}

macro_rules! debug {
    ($($arg:tt)*) => (log::debug!($($arg)*));
}
