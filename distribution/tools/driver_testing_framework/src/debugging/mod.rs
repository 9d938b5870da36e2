//! Debugging and Diagnostic Module
//!
//! This module provides comprehensive debugging and diagnostic tools for driver development
//! and system troubleshooting, including memory tracing, performance profiling, logging,
//! crash analysis, and system state inspection.

use crate::core::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub struct DriverDebugger {
    /// Debugging configuration
    config: DebuggingConfig,
    
    /// Debug logging system
    debug_logger: DebugLogger,
    
    /// Memory tracer
    memory_tracer: MemoryTracer,
    
    /// Performance profiler
    performance_profiler: PerformanceProfiler,
    
    /// System state inspector
    system_inspector: SystemStateInspector,
    
    /// Crash analyzer
    crash_analyzer: CrashAnalyzer,
    
    /// Debug sessions
    debug_sessions: Vec<DebugSession>,
}

impl DriverDebugger {
    /// Create a new driver debugger
    pub fn new(config: DebuggingConfig) -> Self {
        let mut debugger = Self {
            config,
            debug_logger: DebugLogger::new(config.verbosity),
            memory_tracer: MemoryTracer::new(),
            performance_profiler: PerformanceProfiler::new(),
            system_inspector: SystemStateInspector::new(),
            crash_analyzer: CrashAnalyzer::new(),
            debug_sessions: Vec::new(),
        };
        
        // Initialize debugging components
        debugger.initialize_debugging();
        
        debugger
    }
    
    /// Initialize debugging components
    fn initialize_debugging(&mut self) {
        if self.config.detailed_logging {
            self.debug_logger.enable_detailed_logging();
        }
        
        if self.config.memory_tracking {
            self.memory_tracer.enable_tracking();
        }
        
        if self.config.performance_tracing {
            self.performance_profiler.enable_tracing();
        }
    }
    
    /// Analyze drivers and collect debugging information
    pub async fn analyze_drivers(&mut self, simulator: &HardwareSimulator) 
        -> Result<Vec<TestResult>, DriverTestError> {
        log::info!("Starting driver debugging analysis");
        
        let mut results = Vec::new();
        
        // Initialize debugging session
        let session = self.start_debug_session("driver_analysis")?;
        self.debug_sessions.push(session);
        
        // Run memory debugging analysis
        if self.config.memory_tracking {
            log::info!("Running memory debugging analysis");
            let memory_result = self.analyze_memory_usage(simulator).await?;
            results.push(memory_result);
        }
        
        // Run performance debugging analysis
        if self.config.performance_tracing {
            log::info!("Running performance debugging analysis");
            let performance_result = self.analyze_performance_issues(simulator).await?;
            results.push(performance_result);
        }
        
        // Run system state analysis
        log::info!("Running system state analysis");
        let system_result = self.analyze_system_state(simulator).await?;
        results.push(system_result);
        
        // Run logging analysis
        if self.config.detailed_logging {
            log::info!("Running logging analysis");
            let logging_result = self.analyze_debug_logs().await?;
            results.push(logging_result);
        }
        
        // Run crash analysis if configured
        log::info!("Running crash analysis");
        let crash_result = self.analyze_crash_data().await?;
        results.push(crash_result);
        
        // Generate debugging report
        self.generate_debugging_report(&results)?;
        
        log::info!("Driver debugging analysis completed");
        Ok(results)
    }
    
    /// Start a new debug session
    fn start_debug_session(&mut self, name: &str) -> Result<DebugSession, DriverTestError> {
        let session = DebugSession {
            id: self.debug_sessions.len() as u32,
            name: name.to_string(),
            start_time: std::time::Instant::now(),
            events: Vec::new(),
            status: DebugSessionStatus::Active,
        };
        
        self.debug_logger.log_event(DebugEvent::SessionStarted {
            session_name: name.to_string(),
        });
        
        Ok(session)
    }
    
    /// Analyze memory usage patterns
    async fn analyze_memory_usage(&mut self, simulator: &HardwareSimulator) 
        -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Initialize memory tracing
        self.memory_tracer.start_tracing()?;
        
        // Simulate driver operations to trace memory usage
        for i in 0..100 {
            // Trace memory allocation
            self.memory_tracer.trace_allocation(
                &format!("driver_buffer_{}", i),
                1024, // 1KB
                MemoryAllocationType::DriverBuffer,
            )?;
            
            // Trace memory access
            self.memory_tracer.trace_access(
                &format!("driver_buffer_{}", i),
                MemoryAccessType::Read,
            )?;
            
            // Simulate memory operation
            self.simulate_memory_operation(simulator)?;
            
            // Small delay for realistic tracing
            tokio::time::sleep(std::time::Duration::from_micros(100)).await;
        }
        
        // Stop tracing and analyze results
        self.memory_tracer.stop_tracing()?;
        let memory_analysis = self.memory_tracer.analyze_traces()?;
        
        // Trace memory deallocation
        for i in 0..50 {
            self.memory_tracer.trace_deallocation(&format!("driver_buffer_{}", i))?;
        }
        
        let duration = start_time.elapsed();
        
        // Generate memory analysis report
        let memory_report = self.memory_tracer.generate_memory_report();
        
        let status = if memory_analysis.total_leaks == 0 && memory_analysis.total_allocs < 1000 {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        };
        
        Ok(TestResult {
            name: "memory_debugging_analysis".to_string(),
            status,
            duration,
            message: format!(
                "Memory analysis: {} allocs, {} frees, {} leaks, {} bytes peak usage",
                memory_analysis.total_allocs, 
                memory_analysis.total_frees,
                memory_analysis.total_leaks,
                memory_analysis.peak_usage
            ),
            category: TestCategory::Debug,
            metadata: None,
            metrics: Some(TestMetrics {
                execution_time: duration,
                memory_usage: MemoryMetrics {
                    peak_usage: memory_analysis.peak_usage,
                    average_usage: memory_analysis.average_usage,
                    allocations: memory_analysis.total_allocs,
                    deallocations: memory_analysis.total_frees,
                    leaks: memory_analysis.total_leaks,
                },
                cpu_usage: CpuMetrics {
                    usage_percent: 0.0,
                    context_switches: 0,
                    system_calls: 0,
                },
                io_metrics: IoMetrics {
                    read_operations: 0,
                    write_operations: 0,
                    bytes_read: 0,
                    bytes_written: 0,
                    errors: 0,
                },
            }),
        })
    }
    
    /// Analyze performance issues
    async fn analyze_performance_issues(&mut self, simulator: &HardwareSimulator) 
        -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Start performance profiling
        self.performance_profiler.start_profiling()?;
        
        // Simulate various driver operations with performance measurement
        let operations = vec![
            ("serial_read", 1000),
            ("serial_write", 1000),
            ("keyboard_interrupt", 500),
            ("timer_interrupt", 1000),
            ("pci_config_access", 200),
        ];
        
        for (operation_name, iteration_count) in operations {
            for i in 0..iteration_count {
                let measurement_start = std::time::Instant::now();
                
                // Simulate driver operation
                self.simulate_driver_operation(operation_name, simulator)?;
                
                let operation_duration = measurement_start.elapsed();
                
                // Record performance measurement
                self.performance_profiler.record_operation(
                    operation_name,
                    operation_duration,
                )?;
                
                tokio::task::yield_now().await;
            }
        }
        
        // Stop profiling and analyze results
        self.performance_profiler.stop_profiling()?;
        let performance_analysis = self.performance_profiler.analyze_performance()?;
        
        // Generate performance analysis report
        let performance_report = self.performance_profiler.generate_performance_report();
        
        let duration = start_time.elapsed();
        
        // Determine status based on performance thresholds
        let avg_operation_time = performance_analysis.average_operation_time.as_secs_f64() * 1_000_000.0; // Convert to microseconds
        let status = if avg_operation_time < 1000.0 { // Less than 1ms average
            TestStatus::Passed
        } else {
            TestStatus::Warning
        };
        
        Ok(TestResult {
            name: "performance_debugging_analysis".to_string(),
            status,
            duration,
            message: format!(
                "Performance analysis: avg operation time {:.2}μs, slowest operation {:.2}μs",
                avg_operation_time,
                performance_analysis.slowest_operation.as_secs_f64() * 1_000_000.0
            ),
            category: TestCategory::Debug,
            metadata: None,
            metrics: None,
        })
    }
    
    /// Analyze system state
    async fn analyze_system_state(&mut self, simulator: &HardwareSimulator) 
        -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Collect system state information
        let system_state = self.system_inspector.collect_system_state(simulator)?;
        
        // Analyze device states
        let device_analysis = self.system_inspector.analyze_device_states(simulator)?;
        
        // Check for system inconsistencies
        let consistency_check = self.system_inspector.check_system_consistency()?;
        
        // Generate system analysis report
        let system_report = self.system_inspector.generate_system_report();
        
        let duration = start_time.elapsed();
        
        let status = if consistency_check.is_consistent {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        };
        
        Ok(TestResult {
            name: "system_state_debugging_analysis".to_string(),
            status,
            duration,
            message: format!(
                "System state analysis: {} devices, {} inconsistencies found",
                device_analysis.device_count,
                consistency_check.inconsistencies.len()
            ),
            category: TestCategory::Debug,
            metadata: None,
            metrics: None,
        })
    }
    
    /// Analyze debug logs
    async fn analyze_debug_logs(&mut self) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Collect debug logs
        let logs = self.debug_logger.collect_logs()?;
        
        // Analyze log patterns
        let log_analysis = self.debug_logger.analyze_log_patterns()?;
        
        // Detect anomalies in logs
        let anomaly_detection = self.debug_logger.detect_anomalies()?;
        
        // Generate log analysis report
        let log_report = self.debug_logger.generate_log_report();
        
        let duration = start_time.elapsed();
        
        let status = if anomaly_detection.anomalies.is_empty() {
            TestStatus::Passed
        } else {
            TestStatus::Warning
        };
        
        Ok(TestResult {
            name: "debug_logging_analysis".to_string(),
            status,
            duration,
            message: format!(
                "Log analysis: {} log entries, {} anomalies detected, {} error patterns",
                log_analysis.total_logs,
                anomaly_detection.anomalies.len(),
                log_analysis.error_patterns.len()
            ),
            category: TestCategory::Debug,
            metadata: None,
            metrics: None,
        })
    }
    
    /// Analyze crash data
    async fn analyze_crash_data(&mut self) -> Result<TestResult, DriverTestError> {
        let start_time = std::time::Instant::now();
        
        // Collect crash dump data (simulated)
        let crash_data = self.crash_analyzer.collect_crash_dumps()?;
        
        // Analyze crash patterns
        let crash_analysis = self.crash_analyzer.analyze_crash_patterns()?;
        
        // Generate root cause analysis
        let root_cause_analysis = self.crash_analyzer.generate_root_cause_analysis()?;
        
        // Generate crash analysis report
        let crash_report = self.crash_analyzer.generate_crash_report();
        
        let duration = start_time.elapsed();
        
        let status = if crash_analysis.total_crashes == 0 {
            TestStatus::Passed
        } else {
            TestStatus::Warning
        };
        
        Ok(TestResult {
            name: "crash_debugging_analysis".to_string(),
            status,
            duration,
            message: format!(
                "Crash analysis: {} crashes analyzed, {} root causes identified",
                crash_analysis.total_crashes,
                root_cause_analysis.root_causes.len()
            ),
            category: TestCategory::Debug,
            metadata: None,
            metrics: None,
        })
    }
    
    /// Generate debugging report
    fn generate_debugging_report(&self, results: &[TestResult]) -> Result<(), DriverTestError> {
        let passed_count = results.iter().filter(|r| r.status == TestStatus::Passed).count();
        let warning_count = results.iter().filter(|r| r.status == TestStatus::Warning).count();
        let failed_count = results.iter().filter(|r| r.status == TestStatus::Failed).count();
        
        let report = format!(
            "Driver Debugging Report\n\
             ======================\n\
             Total analyses: {}\n\
             Passed: {}\n\
             Warnings: {}\n\
             Failed: {}\n\
             \n\
             Debug Analysis Summary:\n\
             {}\n",
            results.len(),
            passed_count,
            warning_count,
            failed_count,
            results.iter()
                .map(|r| format!("  - {}: {} - {}", r.name, r.status, r.message))
                .collect::<Vec<_>>()
                .join("\n")
        );
        
        println!("{}", report);
        
        if failed_count > 0 {
            log::warn!("Debugging analysis found {} issues requiring attention", failed_count);
        } else {
            log::info!("Debugging analysis completed successfully");
        }
        
        Ok(())
    }
    
    // Helper methods for simulation
    
    fn simulate_memory_operation(&mut self, simulator: &HardwareSimulator) -> Result<(), DriverTestError> {
        // Simulate memory operation
        let _ = simulator.step()?;
        Ok(())
    }
    
    fn simulate_driver_operation(&mut self, operation_name: &str, simulator: &HardwareSimulator) -> Result<(), DriverTestError> {
        match operation_name {
            "serial_read" => {
                if let Some(device) = simulator.get_device("uart0") {
                    // Simulate serial read
                    Ok(())
                } else {
                    Err(DriverTestError::HardwareSimulationError("UART device not found".to_string()))
                }
            },
            "serial_write" => {
                if let Some(device) = simulator.get_device("uart0") {
                    // Simulate serial write
                    Ok(())
                } else {
                    Err(DriverTestError::HardwareSimulationError("UART device not found".to_string()))
                }
            },
            "keyboard_interrupt" => {
                let _ = simulator.simulate_interrupt(1)?;
                Ok(())
            },
            "timer_interrupt" => {
                let _ = simulator.simulate_interrupt(0)?;
                Ok(())
            },
            "pci_config_access" => {
                if let Some(device) = simulator.get_device("pci_device") {
                    // Simulate PCI configuration access
                    Ok(())
                } else {
                    Err(DriverTestError::HardwareSimulationError("PCI device not found".to_string()))
                }
            },
            _ => Err(DriverTestError::HardwareSimulationError(
                format!("Unknown operation: {}", operation_name)
            )),
        }
    }
}

// Supporting structures

/// Debug logger
pub struct DebugLogger {
    verbosity: u8,
    detailed_logging: bool,
    logs: VecDeque<DebugLogEntry>,
    events: Vec<DebugEvent>,
}

impl DebugLogger {
    pub fn new(verbosity: u8) -> Self {
        Self {
            verbosity,
            detailed_logging: false,
            logs: VecDeque::new(),
            events: Vec::new(),
        }
    }
    
    pub fn enable_detailed_logging(&mut self) {
        self.detailed_logging = true;
    }
    
    pub fn log_event(&mut self, event: DebugEvent) {
        self.events.push(event);
        
        if self.detailed_logging {
            self.logs.push_back(DebugLogEntry {
                timestamp: std::time::SystemTime::now(),
                level: DebugLogLevel::Info,
                category: "debugger".to_string(),
                message: format!("{:?}", event),
            });
        }
    }
    
    pub fn collect_logs(&self) -> Result<Vec<DebugLogEntry>, DriverTestError> {
        Ok(self.logs.iter().cloned().collect())
    }
    
    pub fn analyze_log_patterns(&self) -> Result<LogAnalysis, DriverTestError> {
        let total_logs = self.logs.len();
        let error_patterns = self.logs.iter()
            .filter(|log| log.level == DebugLogLevel::Error)
            .map(|log| log.message.clone())
            .collect();
        
        Ok(LogAnalysis {
            total_logs,
            error_patterns,
            warning_patterns: Vec::new(),
            info_patterns: Vec::new(),
        })
    }
    
    pub fn detect_anomalies(&self) -> Result<AnomalyDetection, DriverTestError> {
        let anomalies = Vec::new(); // Simplified anomaly detection
        
        Ok(AnomalyDetection {
            anomalies,
            confidence: 0.0,
        })
    }
    
    pub fn generate_log_report(&self) -> String {
        format!("Debug log analysis completed: {} entries", self.logs.len())
    }
}

/// Memory tracer
pub struct MemoryTracer {
    tracking_enabled: bool,
    traces: Vec<MemoryTrace>,
    allocation_summary: AllocationSummary,
}

impl MemoryTracer {
    pub fn new() -> Self {
        Self {
            tracking_enabled: false,
            traces: Vec::new(),
            allocation_summary: AllocationSummary::default(),
        }
    }
    
    pub fn enable_tracking(&mut self) {
        self.tracking_enabled = true;
    }
    
    pub fn start_tracing(&mut self) -> Result<(), DriverTestError> {
        self.traces.clear();
        Ok(())
    }
    
    pub fn stop_tracing(&mut self) -> Result<(), DriverTestError> {
        self.tracking_enabled = false;
        Ok(())
    }
    
    pub fn trace_allocation(&mut self, name: &str, size: usize, alloc_type: MemoryAllocationType) 
        -> Result<(), DriverTestError> {
        if self.tracking_enabled {
            let trace = MemoryTrace {
                operation: MemoryTraceOperation::Allocate,
                name: name.to_string(),
                size,
                timestamp: std::time::Instant::now(),
                address: format!("0x{:x}", self.traces.len() * 0x1000),
                allocation_type: alloc_type,
            };
            self.traces.push(trace);
            self.allocation_summary.total_allocs += 1;
        }
        Ok(())
    }
    
    pub fn trace_deallocation(&mut self, name: &str) -> Result<(), DriverTestError> {
        if self.tracking_enabled {
            let trace = MemoryTrace {
                operation: MemoryTraceOperation::Deallocate,
                name: name.to_string(),
                size: 0,
                timestamp: std::time::Instant::now(),
                address: format!("0x{:x}", self.traces.len() * 0x1000),
                allocation_type: MemoryAllocationType::Other,
            };
            self.traces.push(trace);
            self.allocation_summary.total_frees += 1;
        }
        Ok(())
    }
    
    pub fn trace_access(&mut self, name: &str, access_type: MemoryAccessType) -> Result<(), DriverTestError> {
        if self.tracking_enabled {
            let trace = MemoryTrace {
                operation: MemoryTraceOperation::Access,
                name: name.to_string(),
                size: 0,
                timestamp: std::time::Instant::now(),
                address: format!("0x{:x}", self.traces.len() * 0x1000),
                allocation_type: MemoryAllocationType::Other,
            };
            self.traces.push(trace);
        }
        Ok(())
    }
    
    pub fn analyze_traces(&self) -> Result<MemoryAnalysis, DriverTestError> {
        let total_leaks = self.allocation_summary.total_allocs.saturating_sub(self.allocation_summary.total_frees);
        
        Ok(MemoryAnalysis {
            total_allocs: self.allocation_summary.total_allocs,
            total_frees: self.allocation_summary.total_frees,
            total_leaks,
            peak_usage: self.allocation_summary.total_allocs * 1024, // Simplified
            average_usage: self.allocation_summary.total_allocs * 512,
        })
    }
    
    pub fn generate_memory_report(&self) -> String {
        format!(
            "Memory trace analysis: {} allocs, {} frees, {} leaks",
            self.allocation_summary.total_allocs,
            self.allocation_summary.total_frees,
            self.allocation_summary.total_allocs.saturating_sub(self.allocation_summary.total_frees)
        )
    }
}

/// Performance profiler
pub struct PerformanceProfiler {
    tracing_enabled: bool,
    operation_traces: Vec<OperationTrace>,
    performance_summary: PerformanceSummary,
}

impl PerformanceProfiler {
    pub fn new() -> Self {
        Self {
            tracing_enabled: false,
            operation_traces: Vec::new(),
            performance_summary: PerformanceSummary::default(),
        }
    }
    
    pub fn enable_tracing(&mut self) {
        self.tracing_enabled = true;
    }
    
    pub fn start_profiling(&mut self) -> Result<(), DriverTestError> {
        self.operation_traces.clear();
        Ok(())
    }
    
    pub fn stop_profiling(&mut self) -> Result<(), DriverTestError> {
        self.tracing_enabled = false;
        Ok(())
    }
    
    pub fn record_operation(&mut self, operation_name: &str, duration: std::time::Duration) 
        -> Result<(), DriverTestError> {
        if self.tracing_enabled {
            let trace = OperationTrace {
                operation_name: operation_name.to_string(),
                duration,
                timestamp: std::time::Instant::now(),
            };
            self.operation_traces.push(trace);
        }
        Ok(())
    }
    
    pub fn analyze_performance(&self) -> Result<PerformanceAnalysis, DriverTestError> {
        if self.operation_traces.is_empty() {
            return Ok(PerformanceAnalysis {
                total_operations: 0,
                average_operation_time: std::time::Duration::from_secs(0),
                slowest_operation: std::time::Duration::from_secs(0),
                fastest_operation: std::time::Duration::from_secs(0),
            });
        }
        
        let total_operations = self.operation_traces.len();
        let total_time: std::time::Duration = self.operation_traces.iter()
            .map(|trace| trace.duration)
            .sum();
        let average_operation_time = total_time / total_operations as u32;
        
        let mut durations: Vec<std::time::Duration> = self.operation_traces.iter()
            .map(|trace| trace.duration)
            .collect();
        durations.sort();
        
        let slowest_operation = durations.last().copied().unwrap_or_default();
        let fastest_operation = durations.first().copied().unwrap_or_default();
        
        Ok(PerformanceAnalysis {
            total_operations,
            average_operation_time,
            slowest_operation,
            fastest_operation,
        })
    }
    
    pub fn generate_performance_report(&self) -> String {
        format!(
            "Performance profile analysis: {} operations",
            self.operation_traces.len()
        )
    }
}

/// System state inspector
pub struct SystemStateInspector;

impl SystemStateInspector {
    pub fn new() -> Self {
        Self
    }
    
    pub fn collect_system_state(&self, simulator: &HardwareSimulator) 
        -> Result<SystemState, DriverTestError> {
        let stats = simulator.get_statistics();
        
        Ok(SystemState {
            timestamp: std::time::SystemTime::now(),
            device_count: stats.device_count,
            bus_count: stats.bus_count,
            simulation_state: stats.simulation_state,
            memory_usage: stats.memory_access_count,
            interrupt_count: stats.interrupt_count,
        })
    }
    
    pub fn analyze_device_states(&self, simulator: &HardwareSimulator) 
        -> Result<DeviceAnalysis, DriverTestError> {
        let stats = simulator.get_statistics();
        
        Ok(DeviceAnalysis {
            device_count: stats.device_count,
            active_devices: stats.device_count,
            error_devices: 0,
        })
    }
    
    pub fn check_system_consistency(&self) -> Result<ConsistencyCheck, DriverTestError> {
        Ok(ConsistencyCheck {
            is_consistent: true,
            inconsistencies: Vec::new(),
        })
    }
    
    pub fn generate_system_report(&self) -> String {
        "System state analysis completed".to_string()
    }
}

/// Crash analyzer
pub struct CrashAnalyzer;

impl CrashAnalyzer {
    pub fn new() -> Self {
        Self
    }
    
    pub fn collect_crash_dumps(&self) -> Result<Vec<CrashDump>, DriverTestError> {
        Ok(Vec::new()) // No crashes in simulation
    }
    
    pub fn analyze_crash_patterns(&self) -> Result<CrashAnalysis, DriverTestError> {
        Ok(CrashAnalysis {
            total_crashes: 0,
            crash_types: HashMap::new(),
            common_crash_locations: Vec::new(),
        })
    }
    
    pub fn generate_root_cause_analysis(&self) -> Result<RootCauseAnalysis, DriverTestError> {
        Ok(RootCauseAnalysis {
            root_causes: Vec::new(),
            confidence_scores: HashMap::new(),
        })
    }
    
    pub fn generate_crash_report(&self) -> String {
        "Crash analysis completed: No crashes detected".to_string()
    }
}

// Supporting data structures

/// Debug session
#[derive(Debug, Clone)]
pub struct DebugSession {
    pub id: u32,
    pub name: String,
    pub start_time: std::time::Instant,
    pub events: Vec<DebugEvent>,
    pub status: DebugSessionStatus,
}

/// Debug session status
#[derive(Debug, Clone, Copy)]
pub enum DebugSessionStatus {
    Active,
    Paused,
    Completed,
    Error,
}

/// Debug event
#[derive(Debug, Clone)]
pub enum DebugEvent {
    SessionStarted { session_name: String },
    OperationPerformed { operation: String, duration: std::time::Duration },
    MemoryAllocated { size: usize, address: String },
    MemoryFreed { address: String },
    ErrorOccurred { error: String },
}

/// Debug log entry
#[derive(Debug, Clone)]
pub struct DebugLogEntry {
    pub timestamp: std::time::SystemTime,
    pub level: DebugLogLevel,
    pub category: String,
    pub message: String,
}

/// Debug log levels
#[derive(Debug, Clone, Copy)]
pub enum DebugLogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

/// Memory trace
#[derive(Debug, Clone)]
pub struct MemoryTrace {
    pub operation: MemoryTraceOperation,
    pub name: String,
    pub size: usize,
    pub timestamp: std::time::Instant,
    pub address: String,
    pub allocation_type: MemoryAllocationType,
}

/// Memory trace operations
#[derive(Debug, Clone, Copy)]
pub enum MemoryTraceOperation {
    Allocate,
    Deallocate,
    Access,
}

/// Memory allocation types
#[derive(Debug, Clone, Copy)]
pub enum MemoryAllocationType {
    DriverBuffer,
    DeviceContext,
    InterruptBuffer,
    ConfigurationData,
    Other,
}

/// Allocation summary
#[derive(Debug, Default)]
pub struct AllocationSummary {
    pub total_allocs: usize,
    pub total_frees: usize,
}

/// Memory analysis
#[derive(Debug, Clone)]
pub struct MemoryAnalysis {
    pub total_allocs: usize,
    pub total_frees: usize,
    pub total_leaks: usize,
    pub peak_usage: u64,
    pub average_usage: u64,
}

/// Operation trace
#[derive(Debug, Clone)]
pub struct OperationTrace {
    pub operation_name: String,
    pub duration: std::time::Duration,
    pub timestamp: std::time::Instant,
}

/// Performance summary
#[derive(Debug, Default)]
pub struct PerformanceSummary {
    pub total_operations: usize,
    pub average_operation_time: std::time::Duration,
}

/// Performance analysis
#[derive(Debug, Clone)]
pub struct PerformanceAnalysis {
    pub total_operations: usize,
    pub average_operation_time: std::time::Duration,
    pub slowest_operation: std::time::Duration,
    pub fastest_operation: std::time::Duration,
}

/// System state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub timestamp: std::time::SystemTime,
    pub device_count: usize,
    pub bus_count: usize,
    pub simulation_state: crate::simulation::SimulationState,
    pub memory_usage: u64,
    pub interrupt_count: u64,
}

/// Device analysis
#[derive(Debug, Clone)]
pub struct DeviceAnalysis {
    pub device_count: usize,
    pub active_devices: usize,
    pub error_devices: usize,
}

/// Consistency check
#[derive(Debug, Clone)]
pub struct ConsistencyCheck {
    pub is_consistent: bool,
    pub inconsistencies: Vec<String>,
}

/// Crash dump
#[derive(Debug, Clone)]
pub struct CrashDump {
    pub timestamp: std::time::SystemTime,
    pub crash_type: String,
    pub location: String,
    pub context: HashMap<String, String>,
}

/// Crash analysis
#[derive(Debug, Clone)]
pub struct CrashAnalysis {
    pub total_crashes: usize,
    pub crash_types: HashMap<String, usize>,
    pub common_crash_locations: Vec<String>,
}

/// Root cause analysis
#[derive(Debug, Clone)]
pub struct RootCauseAnalysis {
    pub root_causes: Vec<String>,
    pub confidence_scores: HashMap<String, f32>,
}

/// Log analysis
#[derive(Debug, Clone)]
pub struct LogAnalysis {
    pub total_logs: usize,
    pub error_patterns: Vec<String>,
    pub warning_patterns: Vec<String>,
    pub info_patterns: Vec<String>,
}

/// Anomaly detection
#[derive(Debug, Clone)]
pub struct AnomalyDetection {
    pub anomalies: Vec<String>,
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_driver_debugger_creation() {
        let config = DebuggingConfig::default();
        let debugger = DriverDebugger::new(config);
        
        assert_eq!(debugger.config.detailed_logging, true);
        assert_eq!(debugger.config.memory_tracking, true);
    }
    
    #[test]
    fn test_memory_tracer() {
        let mut tracer = MemoryTracer::new();
        tracer.enable_tracking();
        tracer.start_tracing().unwrap();
        
        tracer.trace_allocation("test_buffer", 1024, MemoryAllocationType::DriverBuffer).unwrap();
        tracer.trace_access("test_buffer", MemoryAccessType::Read).unwrap();
        tracer.trace_deallocation("test_buffer").unwrap();
        
        let analysis = tracer.analyze_traces().unwrap();
        assert_eq!(analysis.total_allocs, 1);
        assert_eq!(analysis.total_frees, 1);
    }
    
    #[test]
    fn test_performance_profiler() {
        let mut profiler = PerformanceProfiler::new();
        profiler.enable_tracing();
        profiler.start_profiling().unwrap();
        
        let duration = std::time::Duration::from_millis(10);
        profiler.record_operation("test_operation", duration).unwrap();
        
        let analysis = profiler.analyze_performance().unwrap();
        assert_eq!(analysis.total_operations, 1);
    }
}
