//! Boot Time Measurement Benchmarks
//! 
//! This module implements boot time analysis including:
//! - Boot sequence timing
//! - Component initialization measurement
//! - Performance impact analysis
//! - Detailed boot breakdown

use super::{Benchmark, BenchmarkCategory, BenchmarkResult};
use std::time::{Duration, Instant};
use std::collections::HashMap;

/// Boot phase timing structure
#[derive(Debug, Clone)]
pub struct BootPhase {
    pub name: String,
    pub start_time: Duration,
    pub end_time: Duration,
    pub duration: Duration,
}

/// Boot performance benchmark
pub struct BootTimeBenchmark;

impl BootTimeBenchmark {
    pub fn new() -> Self {
        Self
    }
    
    /// Simulate boot sequence timing
    fn simulate_boot_sequence() -> Vec<BootPhase> {
        let mut phases = Vec::new();
        let mut current_time = Duration::from_secs(0);
        
        // Simulate various boot phases with realistic timings
        let boot_phases = vec![
            ("Firmware Initialization", 50),      // 50ms
            ("Hardware Detection", 150),          // 150ms
            ("Memory Initialization", 200),       // 200ms
            ("Kernel Loading", 300),              // 300ms
            ("Device Drivers", 400),              // 400ms
            ("File System Mount", 250),           // 250ms
            ("System Services", 350),             // 350ms
            ("GUI Initialization", 500),          // 500ms
            ("User Login", 200),                  // 200ms
        ];
        
        for (phase_name, phase_duration_ms) in boot_phases {
            let phase = BootPhase {
                name: phase_name.to_string(),
                start_time: current_time,
                end_time: current_time + Duration::from_millis(phase_duration_ms),
                duration: Duration::from_millis(phase_duration_ms),
            };
            
            phases.push(phase);
            current_time = phase.end_time;
        }
        
        phases
    }
    
    /// Measure individual component initialization
    fn measure_component_initialization() -> HashMap<String, Duration> {
        let mut measurements = HashMap::new();
        
        // Simulate component initialization times
        let components = vec![
            ("Memory Manager", 50),
            ("Scheduler", 30),
            ("File System", 120),
            ("Network Stack", 80),
            ("Graphics Driver", 200),
            ("USB Stack", 150),
            ("Audio Driver", 100),
        ];
        
        for (component, time_ms) in components {
            measurements.insert(
                component.to_string(),
                Duration::from_millis(time_ms)
            );
        }
        
        measurements
    }
    
    /// Analyze boot performance impact
    fn analyze_boot_performance() -> HashMap<String, f64> {
        let mut analysis = HashMap::new();
        
        // Boot performance metrics
        analysis.insert("total_boot_time_ms".to_string(), 2400.0); // 2.4 seconds
        analysis.insert("critical_path_ms".to_string(), 1800.0);   // 1.8 seconds
        analysis.insert("parallel_optimization_potential".to_string(), 600.0); // 600ms
        analysis.insert("memory_initialization_percentage".to_string(), 8.3);
        analysis.insert("driver_loading_percentage".to_string(), 16.7);
        analysis.insert("filesystem_percentage".to_string(), 10.4);
        
        analysis
    }
}

impl Benchmark for BootTimeBenchmark {
    fn name(&self) -> &str {
        "Boot Time Analysis"
    }
    
    fn category(&self) -> BenchmarkCategory {
        BenchmarkCategory::BootTime
    }
    
    fn run(&self, iterations: u64) -> Result<BenchmarkResult, Box<dyn std::error::Error>> {
        let start = Instant::now();
        
        // Run boot sequence simulation
        let boot_phases = Self::simulate_boot_sequence();
        let component_initialization = Self::measure_component_initialization();
        let performance_analysis = Self::analyze_boot_performance();
        
        // Simulate boot time measurement workload
        for _ in 0..iterations {
            // Process boot phases
            for phase in &boot_phases {
                let _ = phase.name.len(); // Simulate processing
            }
            
            // Process component measurements
            for (component, duration) in &component_initialization {
                let _ = component.as_bytes().len(); // Simulate processing
                let _ = duration.as_millis();
            }
            
            // Process performance analysis
            for (metric, value) in &performance_analysis {
                let _ = metric.as_bytes().len(); // Simulate processing
                let _ = value;
            }
        }
        
        let elapsed = start.elapsed();
        
        // Calculate total boot time
        let total_boot_time = if let Some(last_phase) = boot_phases.last() {
            last_phase.end_time
        } else {
            Duration::from_secs(2)
        };
        
        let boot_time_seconds = total_boot_time.as_secs_f64();
        let boot_time_ops_per_sec = (iterations as f64) / elapsed.as_secs_f64();
        
        let mut metadata = HashMap::new();
        
        // Add boot phases information
        metadata.insert("boot_phases_count".to_string(), boot_phases.len().to_string());
        metadata.insert("total_boot_time_ms".to_string(), total_boot_time.as_millis().to_string());
        metadata.insert("measured_boot_time_ms".to_string(), elapsed.as_millis().to_string());
        
        // Add component information
        for (component, duration) in &component_initialization {
            metadata.insert(
                format!("component_{}_ms", component.to_lowercase().replace(' ', "_")),
                duration.as_millis().to_string()
            );
        }
        
        // Add performance analysis
        for (metric, value) in &performance_analysis {
            metadata.insert(metric.clone(), value.to_string());
        }
        
        // Add detailed phase breakdown
        for (i, phase) in boot_phases.iter().enumerate() {
            metadata.insert(
                format!("phase_{}_name", i),
                phase.name.clone()
            );
            metadata.insert(
                format!("phase_{}_duration_ms", i),
                phase.duration.as_millis().to_string()
            );
        }
        
        Ok(BenchmarkResult {
            name: self.name().to_string(),
            category: self.category(),
            duration: elapsed,
            iterations,
            operations_per_second: boot_time_ops_per_sec,
            throughput: boot_time_ops_per_sec,
            unit: "boot_analyses/sec".to_string(),
            metadata,
            timestamp: chrono::Utc::now(),
        })
    }
}

/// Boot time comparison benchmark (compares against different boot configurations)
pub struct BootTimeComparison;

impl BootTimeComparison {
    pub fn new() -> Self {
        Self
    }
    
    /// Simulate different boot configurations
    fn simulate_boot_configurations() -> HashMap<String, Duration> {
        let mut configs = HashMap::new();
        
        configs.insert("minimal_boot".to_string(), Duration::from_millis(800));
        configs.insert("standard_boot".to_string(), Duration::from_millis(2400));
        configs.insert("full_boot".to_string(), Duration::from_millis(4200));
        configs.insert("safe_mode".to_string(), Duration::from_millis(3500));
        configs.insert("recovery_mode".to_string(), Duration::from_millis(1500));
        
        configs
    }
    
    /// Compare boot times
    fn compare_boot_times(configs: &HashMap<String, Duration>) -> HashMap<String, f64> {
        let mut comparisons = HashMap::new();
        
        if let Some(&standard_time) = configs.get("standard_boot") {
            let standard_ms = standard_time.as_millis() as f64;
            
            for (config_name, &duration) in configs {
                let config_ms = duration.as_millis() as f64;
                let relative_speed = (standard_ms / config_ms) * 100.0;
                comparisons.insert(
                    format!("{}_relative_speed_percent", config_name),
                    relative_speed
                );
            }
        }
        
        comparisons
    }
}

impl Benchmark for BootTimeComparison {
    fn name(&self) -> &str {
        "Boot Time Comparison"
    }
    
    fn category(&self) -> BenchmarkCategory {
        BenchmarkCategory::BootTime
    }
    
    fn run(&self, iterations: u64) -> Result<BenchmarkResult, Box<dyn std::error::Error>> {
        let start = Instant::now();
        
        let boot_configs = Self::simulate_boot_configurations();
        let comparisons = Self::compare_boot_times(&boot_configs);
        
        // Simulate comparison workload
        for _ in 0..iterations {
            // Process each configuration
            for (config_name, &duration) in &boot_configs {
                let _ = config_name.as_bytes().len();
                let _ = duration.as_millis();
            }
            
            // Process comparisons
            for (_key, &value) in &comparisons {
                let _ = value;
            }
        }
        
        let elapsed = start.elapsed();
        let ops_per_sec = (iterations as f64) / elapsed.as_secs_f64();
        
        let mut metadata = HashMap::new();
        
        // Add configuration information
        for (config_name, &duration) in &boot_configs {
            metadata.insert(
                format!("{}_time_ms", config_name),
                duration.as_millis().to_string()
            );
        }
        
        // Add comparison metrics
        for (key, value) in &comparisons {
            metadata.insert(key.clone(), value.to_string());
        }
        
        // Add analysis summary
        if let Some(&standard_time) = boot_configs.get("standard_boot") {
            metadata.insert("baseline_config".to_string(), "standard_boot".to_string());
            metadata.insert("baseline_time_ms".to_string(), standard_time.as_millis().to_string());
        }
        
        Ok(BenchmarkResult {
            name: self.name().to_string(),
            category: self.category(),
            duration: elapsed,
            iterations,
            operations_per_second: ops_per_sec,
            throughput: ops_per_sec,
            unit: "comparisons/sec".to_string(),
            metadata,
            timestamp: chrono::Utc::now(),
        })
    }
}

/// Boot optimization benchmark (measures potential improvements)
pub struct BootOptimization;

impl BootOptimization {
    pub fn new() -> Self {
        Self
    }
    
    /// Simulate boot optimization opportunities
    fn analyze_optimizations() -> HashMap<String, (Duration, f64)> {
        let mut optimizations = HashMap::new();
        
        // Potential optimizations with time savings and difficulty percentage
        optimizations.insert("parallel_driver_loading".to_string(), (Duration::from_millis(200), 85.0));
        optimizations.insert("lazy_service_startup".to_string(), (Duration::from_millis(300), 70.0));
        optimizations.insert("preloaded_modules".to_string(), (Duration::from_millis(150), 90.0));
        optimizations.insert("optimized_filesystem".to_string(), (Duration::from_millis(100), 60.0));
        optimizations.insert("fast_memory_init".to_string(), (Duration::from_millis(80), 40.0));
        
        optimizations
    }
    
    /// Calculate total optimization potential
    fn calculate_optimization_potential(optimizations: &HashMap<String, (Duration, f64)>) -> (Duration, f64) {
        let total_savings: Duration = optimizations.values()
            .map(|(duration, _)| *duration)
            .sum();
        
        let average_difficulty: f64 = optimizations.values()
            .map(|(_, difficulty)| *difficulty)
            .sum::<f64>() / optimizations.len() as f64;
        
        (total_savings, average_difficulty)
    }
}

impl Benchmark for BootOptimization {
    fn name(&self) -> &str {
        "Boot Optimization Analysis"
    }
    
    fn category(&self) -> BenchmarkCategory {
        BenchmarkCategory::BootTime
    }
    
    fn run(&self, iterations: u64) -> Result<BenchmarkResult, Box<dyn std::error::Error>> {
        let start = Instant::now();
        
        let optimizations = Self::analyze_optimizations();
        let (total_savings, avg_difficulty) = Self::calculate_optimization_potential(&optimizations);
        
        // Simulate optimization analysis workload
        for _ in 0..iterations {
            // Process each optimization
            for (opt_name, (duration, difficulty)) in &optimizations {
                let _ = opt_name.as_bytes().len();
                let _ = duration.as_millis();
                let _ = difficulty;
            }
            
            // Calculate totals
            let _ = total_savings.as_millis();
            let _ = avg_difficulty;
        }
        
        let elapsed = start.elapsed();
        let ops_per_sec = (iterations as f64) / elapsed.as_secs_f64();
        
        let mut metadata = HashMap::new();
        
        // Add optimization details
        for (opt_name, (duration, difficulty)) in &optimizations {
            metadata.insert(
                format!("{}_time_saving_ms", opt_name.replace('-', "_")),
                duration.as_millis().to_string()
            );
            metadata.insert(
                format!("{}_difficulty_percent", opt_name.replace('-', "_")),
                difficulty.to_string()
            );
        }
        
        // Add summary
        metadata.insert("total_potential_savings_ms".to_string(), total_savings.as_millis().to_string());
        metadata.insert("average_implementation_difficulty".to_string(), avg_difficulty.to_string());
        metadata.insert("optimization_opportunities".to_string(), optimizations.len().to_string());
        
        // Calculate percentage improvement
        let current_boot_time = 2400; // Current standard boot time
        let improvement_percent = (total_savings.as_millis() as f64 / current_boot_time as f64) * 100.0;
        metadata.insert("potential_improvement_percent".to_string(), improvement_percent.to_string());
        
        Ok(BenchmarkResult {
            name: self.name().to_string(),
            category: self.category(),
            duration: elapsed,
            iterations,
            operations_per_second: ops_per_sec,
            throughput: ops_per_sec,
            unit: "optimizations/sec".to_string(),
            metadata,
            timestamp: chrono::Utc::now(),
        })
    }
}

/// Complete boot time benchmarking suite
pub struct BootTimeBenchmarkSuite {
    pub boot_analysis: BootTimeBenchmark,
    pub boot_comparison: BootTimeComparison,
    pub boot_optimization: BootOptimization,
}

impl BootTimeBenchmarkSuite {
    pub fn new() -> Self {
        Self {
            boot_analysis: BootTimeBenchmark::new(),
            boot_comparison: BootTimeComparison::new(),
            boot_optimization: BootOptimization::new(),
        }
    }
    
    /// Run all boot time benchmarks
    pub fn run_all(&self, iterations: u64) -> Result<Vec<BenchmarkResult>, Box<dyn std::error::Error>> {
        use super::BenchmarkRunner;
        
        let runner = BenchmarkRunner::new(false);
        let benchmarks: Vec<_> = vec![
            &self.boot_analysis,
            &self.boot_comparison,
            &self.boot_optimization,
        ];
        
        runner.run_benchmarks(benchmarks.into_iter().cloned().collect(), iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_boot_time_benchmark() {
        let bench = BootTimeBenchmark::new();
        let result = bench.run(10).unwrap();
        assert!(result.operations_per_second > 0.0);
        assert!(result.metadata.contains_key("total_boot_time_ms"));
    }
    
    #[test]
    fn test_boot_optimization() {
        let bench = BootOptimization::new();
        let result = bench.run(10).unwrap();
        assert!(result.operations_per_second > 0.0);
        assert!(result.metadata.contains_key("total_potential_savings_ms"));
    }
}