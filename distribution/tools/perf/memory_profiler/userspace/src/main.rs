//! Memory Profiler CLI Tool
//! 
//! Command-line interface for the MultiOS memory profiling system.
//! Provides real-time monitoring, analysis, and visualization of memory usage.

use clap::{Arg, Command};
use crossbeam_channel::{unbounded, Sender, Receiver};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;

mod commands;
mod visualization;
mod analysis;
mod realtime;
mod database;
mod ui;

use commands::*;
use visualization::*;
use analysis::*;
use realtime::*;
use database::*;

/// Application state
#[derive(Clone)]
struct AppState {
    data_sender: Sender<ProfilerData>,
    config: AppConfig,
    filters: DataFilters,
}

#[derive(Clone)]
struct AppConfig {
    update_interval: Duration,
    max_data_points: usize,
    enable_real_time: bool,
    enable_analysis: bool,
    enable_database: bool,
}

#[derive(Clone)]
struct DataFilters {
    process_filter: Option<u32>,
    thread_filter: Option<u32>,
    allocation_size_filter: Option<(usize, usize)>,
    time_range_filter: Option<(u64, u64)>,
}

/// Profiler data types
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct ProfilerData {
    timestamp: u64,
    data_type: DataType,
    payload: DataPayload,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
enum DataType {
    Allocation,
    Deallocation,
    MemorySnapshot,
    CacheAccess,
    StackFrame,
    LeakDetection,
    Fragmentation,
    NUMAAccess,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
enum DataPayload {
    AllocationInfo(AllocationInfo),
    MemorySnapshotInfo(MemorySnapshotInfo),
    CacheAccessInfo(CacheAccessInfo),
    StackFrameInfo(StackFrameInfo),
    LeakInfo(LeakInfo),
    FragmentationInfo(FragmentationInfo),
    NUMAInfo(NUMAInfo),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct AllocationInfo {
    address: u64,
    size: usize,
    caller: u64,
    thread_id: u32,
    flags: u32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct MemorySnapshotInfo {
    total_allocated: u64,
    allocation_rate: i64,
    free_memory: u64,
    memory_pressure: f32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct CacheAccessInfo {
    address: u64,
    hit: bool,
    latency: u32,
    cache_level: u8,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct StackFrameInfo {
    function_address: u64,
    frame_size: usize,
    call_depth: u32,
    thread_id: u32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct LeakInfo {
    address: u64,
    size: usize,
    suspicion_score: f32,
    leak_type: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct FragmentationInfo {
    external_fragmentation: f32,
    internal_fragmentation: f32,
    largest_free_block: u64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct NUMAInfo {
    node_id: u8,
    local_access_ratio: f32,
    memory_pressure: f32,
    temperature: f32,
}

/// Main application entry point
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    
    // Parse command line arguments
    let matches = Command::new("Memory Profiler")
        .version("1.0.0")
        .about("MultiOS Memory Profiling and Optimization Tool")
        .subcommand_required(true)
        .get_matches();
    
    // Setup application state
    let (data_sender, data_receiver) = unbounded();
    let app_state = AppState {
        data_sender,
        config: AppConfig {
            update_interval: Duration::from_millis(100),
            max_data_points: 10000,
            enable_real_time: true,
            enable_analysis: true,
            enable_database: true,
        },
        filters: DataFilters {
            process_filter: None,
            thread_filter: None,
            allocation_size_filter: None,
            time_range_filter: None,
        },
    };
    
    // Handle subcommands
    match matches.subcommand() {
        Some(("monitor", sub_matches)) => {
            handle_monitor_command(app_state, sub_matches).await?;
        }
        Some(("analyze", sub_matches)) => {
            handle_analyze_command(app_state, sub_matches).await?;
        }
        Some(("visualize", sub_matches)) => {
            handle_visualize_command(app_state, sub_matches).await?;
        }
        Some(("report", sub_matches)) => {
            handle_report_command(app_state, sub_matches).await?;
        }
        Some(("interactive", sub_matches)) => {
            handle_interactive_command(app_state, sub_matches).await?;
        }
        Some(("config", sub_matches)) => {
            handle_config_command(app_state, sub_matches).await?;
        }
        _ => {
            println!("Use --help to see available commands");
        }
    }
    
    Ok(())
}

/// Handle monitor command - real-time memory monitoring
async fn handle_monitor_command(
    app_state: AppState, 
    matches: &clap::ArgMatches
) -> Result<(), Box<dyn std::error::Error>> {
    let interval = matches.get_one::<u64>("interval")
        .map(|v| Duration::from_millis(*v))
        .unwrap_or(Duration::from_millis(500));
    
    let display_format = matches.get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("human");
    
    let enable_alerts = matches.get_flag("alerts");
    
    println!("Starting real-time memory monitoring (interval: {:?})", interval);
    
    let mut rt_monitor = RealtimeMonitor::new(app_state.clone());
    rt_monitor.set_interval(interval);
    rt_monitor.set_display_format(display_format);
    rt_monitor.set_alerts_enabled(enable_alerts);
    
    rt_monitor.start().await?;
    Ok(())
}

/// Handle analyze command - analyze memory data
async fn handle_analyze_command(
    app_state: AppState,
    matches: &clap::ArgMatches
) -> Result<(), Box<dyn std::error::Error>> {
    let input_file = matches.get_one::<String>("input")
        .ok_or("Input file required for analysis")?;
    
    let analysis_type = matches.get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("comprehensive");
    
    let output_format = matches.get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("json");
    
    let mut analyzer = MemoryAnalyzer::new(app_state.clone());
    analyzer.set_analysis_type(analysis_type);
    analyzer.set_output_format(output_format);
    
    let result = analyzer.analyze_file(input_file).await?;
    println!("Analysis complete: {}", result.summary);
    
    Ok(())
}

/// Handle visualize command - generate visualizations
async fn handle_visualize_command(
    app_state: AppState,
    matches: &clap::ArgMatches
) -> Result<(), Box<dyn std::error::Error>> {
    let input_file = matches.get_one::<String>("input")
        .ok_or("Input file required for visualization")?;
    
    let output_file = matches.get_one::<String>("output")
        .ok_or("Output file required")?;
    
    let chart_type = matches.get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("memory_usage");
    
    let width = matches.get_one::<u32>("width").unwrap_or(&800);
    let height = matches.get_one::<u32>("height").unwrap_or(&600);
    
    let mut visualizer = MemoryVisualizer::new(app_state.clone());
    visualizer.set_chart_type(chart_type);
    visualizer.set_dimensions(*width, *height);
    
    visualizer.generate_visualization(input_file, output_file).await?;
    println!("Visualization saved to: {}", output_file);
    
    Ok(())
}

/// Handle report command - generate comprehensive reports
async fn handle_report_command(
    app_state: AppState,
    matches: &clap::ArgMatches
) -> Result<(), Box<dyn std::error::Error>> {
    let output_file = matches.get_one::<String>("output")
        .ok_or("Output file required")?;
    
    let report_type = matches.get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("comprehensive");
    
    let include_recommendations = matches.get_flag("recommendations");
    let include_details = matches.get_flag("details");
    
    let mut reporter = ReportGenerator::new(app_state.clone());
    reporter.set_report_type(report_type);
    reporter.set_include_recommendations(include_recommendations);
    reporter.set_include_details(include_details);
    
    reporter.generate_report(output_file).await?;
    println!("Report generated: {}", output_file);
    
    Ok(())
}

/// Handle interactive command - start interactive TUI
async fn handle_interactive_command(
    app_state: AppState,
    matches: &clap::ArgMatches
) -> Result<(), Box<dyn std::error::Error>> {
    let enable_live_updates = matches.get_flag("live");
    let theme = matches.get_one::<String>("theme")
        .map(|s| s.as_str())
        .unwrap_or("dark");
    
    let mut ui = InteractiveUI::new(app_state.clone());
    ui.set_live_updates(enable_live_updates);
    ui.set_theme(theme);
    
    ui.start().await?;
    Ok(())
}

/// Handle config command - manage configuration
async fn handle_config_command(
    app_state: AppState,
    matches: &clap::ArgMatches
) -> Result<(), Box<dyn std::error::Error>> {
    if matches.get_flag("list") {
        println!("Current configuration:");
        println!("  Update interval: {:?}", app_state.config.update_interval);
        println!("  Max data points: {}", app_state.config.max_data_points);
        println!("  Real-time enabled: {}", app_state.config.enable_real_time);
        println!("  Analysis enabled: {}", app_state.config.enable_analysis);
        println!("  Database enabled: {}", app_state.config.enable_database);
    }
    
    if let Some(key) = matches.get_one::<String>("get") {
        get_config_value(app_state, key)?;
    }
    
    if let (Some(key), Some(value)) = matches.get_one::<String>("set").zip(matches.get_one::<String>("value")) {
        set_config_value(app_state, key, value)?;
    }
    
    if matches.get_flag("reset") {
        reset_config(app_state)?;
        println!("Configuration reset to defaults");
    }
    
    Ok(())
}

fn get_config_value(app_state: AppState, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    match key {
        "update_interval" => println!("{}", app_state.config.update_interval.as_millis()),
        "max_data_points" => println!("{}", app_state.config.max_data_points),
        "enable_real_time" => println!("{}", app_state.config.enable_real_time),
        "enable_analysis" => println!("{}", app_state.config.enable_analysis),
        "enable_database" => println!("{}", app_state.config.enable_database),
        _ => println!("Unknown configuration key: {}", key),
    }
    Ok(())
}

fn set_config_value(app_state: AppState, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    // This would update the configuration in a real implementation
    println!("Setting {} to {}", key, value);
    Ok(())
}

fn reset_config(app_state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    // This would reset configuration to defaults
    println!("Resetting configuration");
    Ok(())
}