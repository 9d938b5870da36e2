//! Performance Analysis and Benchmarking Module
//!
//! This module provides comprehensive performance analysis tools for
//! CPU architectures, including benchmarking, modeling, and comparison.

use crate::architecture::{Architecture, ArchitectureSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use anyhow::{Result, Context};
use log::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub architecture: Architecture,
    pub benchmark_name: String,
    pub test_type: BenchmarkType,
    pub execution_time_ns: u64,
    pub instructions_per_second: u64,
    pub cycles_per_instruction: f64,
    pub throughput: f64,
    pub memory_bandwidth_gbps: f64,
    pub cache_hit_rate: f64,
    pub branch_prediction_accuracy: f64,
    pub power_consumption_watts: Option<f64>,
    pub energy_efficiency_ops_per_watt: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BenchmarkType {
    Arithmetic,
    Memory,
    Branch,
    FloatingPoint,
    Vector,
    Mixed,
    Synthetic,
    RealWorld(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub latency: HashMap<String, u64>,
    pub throughput: HashMap<String, f64>,
    pub resource_utilization: HashMap<String, f64>,
    pub energy_consumption: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub name: String,
    pub description: String,
    pub benchmarks: Vec<BenchmarkDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkDefinition {
    pub name: String,
    pub test_type: BenchmarkType,
    pub workload_size: u64,
    pub iterations: u32,
    pub description: String,
}

pub struct PerformanceAnalyzer {
    architecture_specs: HashMap<Architecture, ArchitectureSpec>,
}

impl PerformanceAnalyzer {
    pub fn new() -> Self {
        let mut specs = HashMap::new();
        
        for arch in ArchitectureSpec::all_architectures() {
            specs.insert(arch.clone(), ArchitectureSpec::get(&arch));
        }

        Self {
            architecture_specs: specs,
        }
    }

    /// Run benchmarks for multiple architectures
    pub fn run_benchmarks(
        &self,
        architectures: Vec<Architecture>,
        benchmark_type: &str,
    ) -> Result<HashMap<Architecture, Vec<BenchmarkResult>>> {
        let mut results = HashMap::new();
        
        for arch in architectures {
            info!("Running benchmarks for architecture: {}", arch);
            let benchmark_results = self.run_architecture_benchmarks(&arch, benchmark_type)?;
            results.insert(arch, benchmark_results);
        }

        Ok(results)
    }

    /// Run benchmarks for a specific architecture
    fn run_architecture_benchmarks(
        &self,
        architecture: &Architecture,
        benchmark_type: &str,
    ) -> Result<Vec<BenchmarkResult>> {
        let spec = self.architecture_specs.get(architecture)
            .context("Architecture specification not found")?;

        let benchmark_suite = self.load_benchmark_suite(benchmark_type)?;
        let mut results = Vec::new();

        for benchmark_def in &benchmark_suite.benchmarks {
            info!("Running benchmark: {} on {}", benchmark_def.name, architecture);
            
            let result = self.run_single_benchmark(architecture, spec, benchmark_def)?;
            results.push(result);
        }

        Ok(results)
    }

    /// Run a single benchmark
    fn run_single_benchmark(
        &self,
        architecture: &Architecture,
        spec: &ArchitectureSpec,
        benchmark: &BenchmarkDefinition,
    ) -> Result<BenchmarkResult> {
        let start_time = std::time::Instant::now();
        
        // Simulate benchmark execution
        let simulation_result = self.simulate_benchmark_execution(architecture, spec, benchmark)?;
        
        let execution_time = start_time.elapsed().as_nanos();
        let workload_size = benchmark.workload_size as f64;
        let execution_time_s = execution_time as f64 / 1_000_000_000.0;

        Ok(BenchmarkResult {
            architecture: architecture.clone(),
            benchmark_name: benchmark.name.clone(),
            test_type: benchmark.test_type.clone(),
            execution_time_ns: execution_time,
            instructions_per_second: (workload_size / execution_time_s) as u64,
            cycles_per_instruction: simulation_result.cycles_per_instruction,
            throughput: simulation_result.throughput,
            memory_bandwidth_gbps: simulation_result.memory_bandwidth_gbps,
            cache_hit_rate: simulation_result.cache_hit_rate,
            branch_prediction_accuracy: simulation_result.branch_prediction_accuracy,
            power_consumption_watts: simulation_result.power_consumption_watts,
            energy_efficiency_ops_per_watt: simulation_result.energy_efficiency_ops_per_watt,
        })
    }

    /// Simulate benchmark execution
    fn simulate_benchmark_execution(
        &self,
        architecture: &Architecture,
        spec: &ArchitectureSpec,
        benchmark: &BenchmarkDefinition,
    ) -> Result<SimulationResult> {
        let workload_size = benchmark.workload_size;
        let iterations = benchmark.iterations;

        // Base performance characteristics based on architecture
        let (base_cycles, memory_efficiency, branch_predictor_efficiency) = match architecture {
            Architecture::X86_64 => (1.0, 0.85, 0.95),
            Architecture::ARM64 => (1.1, 0.90, 0.92),
            Architecture::RISC_V64 => (1.3, 0.70, 0.80),
            Architecture::SPARC64 => (1.2, 0.80, 0.85),
            Architecture::PowerPC64 => (1.15, 0.88, 0.90),
        };

        // Calculate performance based on test type
        let (cycles_per_instruction, throughput, memory_bandwidth) = match &benchmark.test_type {
            BenchmarkType::Arithmetic => {
                let cpi = base_cycles * spec.pipeline_info.stages as f64 / 15.0;
                let throughput = (spec.pipeline_info.pipeline_width as f64) / cpi;
                let memory_bw = 0.3 * self.get_architecture_memory_bandwidth(architecture);
                (cpi, throughput, memory_bw)
            }
            BenchmarkType::Memory => {
                let cpi = base_cycles * 2.0;
                let throughput = (spec.pipeline_info.pipeline_width as f64) / cpi * 0.5;
                let memory_bw = 0.9 * self.get_architecture_memory_bandwidth(architecture);
                (cpi, throughput, memory_bw)
            }
            BenchmarkType::Branch => {
                let cpi = base_cycles * branch_predictor_efficiency * 1.5;
                let throughput = (spec.pipeline_info.pipeline_width as f64) / cpi * branch_predictor_efficiency;
                let memory_bw = 0.2 * self.get_architecture_memory_bandwidth(architecture);
                (cpi, throughput, memory_bw)
            }
            BenchmarkType::FloatingPoint => {
                let cpi = base_cycles * 2.5;
                let throughput = (spec.pipeline_info.pipeline_width as f64 / 2.0) / cpi;
                let memory_bw = 0.4 * self.get_architecture_memory_bandwidth(architecture);
                (cpi, throughput, memory_bw)
            }
            BenchmarkType::Vector => {
                let cpi = base_cycles * 0.8; // Vector operations are typically more efficient
                let throughput = (spec.pipeline_info.pipeline_width as f64 * 4.0) / cpi;
                let memory_bw = 0.7 * self.get_architecture_memory_bandwidth(architecture);
                (cpi, throughput, memory_bw)
            }
            BenchmarkType::Mixed => {
                let cpi = base_cycles * 1.2;
                let throughput = (spec.pipeline_info.pipeline_width as f64) / cpi * 0.9;
                let memory_bw = 0.6 * self.get_architecture_memory_bandwidth(architecture);
                (cpi, throughput, memory_bw)
            }
            BenchmarkType::Synthetic | BenchmarkType::RealWorld(_) => {
                let cpi = base_cycles * 1.0;
                let throughput = (spec.pipeline_info.pipeline_width as f64) / cpi;
                let memory_bw = memory_efficiency * self.get_architecture_memory_bandwidth(architecture);
                (cpi, throughput, memory_bw)
            }
        };

        // Calculate additional metrics
        let cache_hit_rate = match &benchmark.test_type {
            BenchmarkType::Memory => 0.85,
            BenchmarkType::Arithmetic => 0.95,
            BenchmarkType::Branch => 0.90,
            _ => 0.88,
        };

        let branch_prediction_accuracy = if spec.pipeline_info.branch_prediction == crate::architecture::BranchPredictor::Tournament {
            0.95
        } else if matches!(spec.pipeline_info.branch_prediction, crate::architecture::BranchPredictor::TAGE) {
            0.92
        } else {
            0.85
        };

        // Estimate power consumption (simplified model)
        let base_power = match architecture {
            Architecture::X86_64 => 65.0,
            Architecture::ARM64 => 25.0,
            Architecture::RISC_V64 => 15.0,
            Architecture::SPARC64 => 85.0,
            Architecture::PowerPC64 => 70.0,
        };
        let power_consumption_watts = Some(base_power * (throughput / 10.0).min(1.5));
        
        let energy_efficiency_ops_per_watt = Some(
            (workload_size as f64 / execution_time_s) / power_consumption_watts.unwrap()
        );

        // Simulate actual work
        let total_operations = workload_size * iterations as u64;
        std::thread::sleep(std::time::Duration::from_millis(
            (total_operations as f64 / 1_000_000.0).min(100.0) as u64
        ));

        Ok(SimulationResult {
            cycles_per_instruction,
            throughput,
            memory_bandwidth_gbps: memory_bandwidth,
            cache_hit_rate,
            branch_prediction_accuracy,
            power_consumption_watts,
            energy_efficiency_ops_per_watt,
        })
    }

    /// Get memory bandwidth for architecture
    fn get_architecture_memory_bandwidth(&self, architecture: &Architecture) -> f64 {
        match architecture {
            Architecture::X86_64 => 76.8, // GB/s
            Architecture::ARM64 => 51.2,  // GB/s
            Architecture::RISC_V64 => 25.6, // GB/s
            Architecture::SPARC64 => 102.4, // GB/s
            Architecture::PowerPC64 => 68.0, // GB/s
        }
    }

    /// Load benchmark suite
    fn load_benchmark_suite(&self, benchmark_type: &str) -> Result<BenchmarkSuite> {
        match benchmark_type {
            "arithmetic" => self.generate_arithmetic_benchmarks(),
            "memory" => self.generate_memory_benchmarks(),
            "branch" => self.generate_branch_benchmarks(),
            "floating_point" => self.generate_floating_point_benchmarks(),
            "vector" => self.generate_vector_benchmarks(),
            "all" => self.generate_comprehensive_benchmarks(),
            _ => self.generate_comprehensive_benchmarks(),
        }
    }

    fn generate_arithmetic_benchmarks(&self) -> Result<BenchmarkSuite> {
        let benchmarks = vec![
            BenchmarkDefinition {
                name: "Integer Addition".to_string(),
                test_type: BenchmarkType::Arithmetic,
                workload_size: 10_000_000,
                iterations: 100,
                description: "Test integer addition performance".to_string(),
            },
            BenchmarkDefinition {
                name: "Integer Multiplication".to_string(),
                test_type: BenchmarkType::Arithmetic,
                workload_size: 1_000_000,
                iterations: 50,
                description: "Test integer multiplication performance".to_string(),
            },
            BenchmarkDefinition {
                name: "Integer Division".to_string(),
                test_type: BenchmarkType::Arithmetic,
                workload_size: 100_000,
                iterations: 10,
                description: "Test integer division performance".to_string(),
            },
        ];

        Ok(BenchmarkSuite {
            name: "Arithmetic Benchmarks".to_string(),
            description: "Benchmarks focused on arithmetic operations".to_string(),
            benchmarks,
        })
    }

    fn generate_memory_benchmarks(&self) -> Result<BenchmarkSuite> {
        let benchmarks = vec![
            BenchmarkDefinition {
                name: "Sequential Read".to_string(),
                test_type: BenchmarkType::Memory,
                workload_size: 100_000_000,
                iterations: 1000,
                description: "Test sequential memory read performance".to_string(),
            },
            BenchmarkDefinition {
                name: "Sequential Write".to_string(),
                test_type: BenchmarkType::Memory,
                workload_size: 100_000_000,
                iterations: 1000,
                description: "Test sequential memory write performance".to_string(),
            },
            BenchmarkDefinition {
                name: "Random Access".to_string(),
                test_type: BenchmarkType::Memory,
                workload_size: 10_000_000,
                iterations: 100,
                description: "Test random memory access performance".to_string(),
            },
        ];

        Ok(BenchmarkSuite {
            name: "Memory Benchmarks".to_string(),
            description: "Benchmarks focused on memory access patterns".to_string(),
            benchmarks,
        })
    }

    fn generate_branch_benchmarks(&self) -> Result<BenchmarkSuite> {
        let benchmarks = vec![
            BenchmarkDefinition {
                name: "Conditional Branch".to_string(),
                test_type: BenchmarkType::Branch,
                workload_size: 10_000_000,
                iterations: 1000,
                description: "Test conditional branch prediction".to_string(),
            },
            BenchmarkDefinition {
                name: "Loop Performance".to_string(),
                test_type: BenchmarkType::Branch,
                workload_size: 1_000_000,
                iterations: 100,
                description: "Test loop performance and branch prediction".to_string(),
            },
        ];

        Ok(BenchmarkSuite {
            name: "Branch Benchmarks".to_string(),
            description: "Benchmarks focused on branch prediction and control flow".to_string(),
            benchmarks,
        })
    }

    fn generate_floating_point_benchmarks(&self) -> Result<BenchmarkSuite> {
        let benchmarks = vec![
            BenchmarkDefinition {
                name: "Floating Point Addition".to_string(),
                test_type: BenchmarkType::FloatingPoint,
                workload_size: 5_000_000,
                iterations: 100,
                description: "Test floating point addition performance".to_string(),
            },
            BenchmarkDefinition {
                name: "Floating Point Multiplication".to_string(),
                test_type: BenchmarkType::FloatingPoint,
                workload_size: 5_000_000,
                iterations: 100,
                description: "Test floating point multiplication performance".to_string(),
            },
            BenchmarkDefinition {
                name: "Matrix Multiplication".to_string(),
                test_type: BenchmarkType::FloatingPoint,
                workload_size: 1_000_000,
                iterations: 10,
                description: "Test matrix multiplication performance".to_string(),
            },
        ];

        Ok(BenchmarkSuite {
            name: "Floating Point Benchmarks".to_string(),
            description: "Benchmarks focused on floating point operations".to_string(),
            benchmarks,
        })
    }

    fn generate_vector_benchmarks(&self) -> Result<BenchmarkSuite> {
        let benchmarks = vec![
            BenchmarkDefinition {
                name: "Vector Addition".to_string(),
                test_type: BenchmarkType::Vector,
                workload_size: 20_000_000,
                iterations: 100,
                description: "Test vector addition performance".to_string(),
            },
            BenchmarkDefinition {
                name: "Vector Multiply".to_string(),
                test_type: BenchmarkType::Vector,
                workload_size: 20_000_000,
                iterations: 100,
                description: "Test vector multiplication performance".to_string(),
            },
        ];

        Ok(BenchmarkSuite {
            name: "Vector Benchmarks".to_string(),
            description: "Benchmarks focused on vector/SIMD operations".to_string(),
            benchmarks,
        })
    }

    fn generate_comprehensive_benchmarks(&self) -> Result<BenchmarkSuite> {
        let mut all_benchmarks = Vec::new();
        
        all_benchmarks.extend(self.generate_arithmetic_benchmarks()?.benchmarks);
        all_benchmarks.extend(self.generate_memory_benchmarks()?.benchmarks);
        all_benchmarks.extend(self.generate_branch_benchmarks()?.benchmarks);
        all_benchmarks.extend(self.generate_floating_point_benchmarks()?.benchmarks);
        all_benchmarks.extend(self.generate_vector_benchmarks()?.benchmarks);

        Ok(BenchmarkSuite {
            name: "Comprehensive Benchmark Suite".to_string(),
            description: "Complete benchmark suite covering all operation types".to_string(),
            benchmarks: all_benchmarks,
        })
    }

    /// Generate performance comparison report
    pub fn generate_comparison_report(
        &self,
        results: &HashMap<Architecture, Vec<BenchmarkResult>>,
    ) -> Result<String> {
        let mut report = String::new();
        
        report.push_str("# CPU Architecture Performance Comparison Report\n\n");
        report.push_str("## Executive Summary\n\n");
        report.push_str("This report compares the performance characteristics of different CPU architectures across various benchmark types.\n\n");

        // Performance summary table
        report.push_str("## Performance Summary\n\n");
        report.push_str("| Architecture | Avg CPI | Memory BW (GB/s) | Branch Acc | Power (W) | Eficiencia |\n");
        report.push_str("|--------------|---------|------------------|------------|-----------|------------|\n");

        for (arch, arch_results) in results {
            let avg_cpi: f64 = arch_results.iter().map(|r| r.cycles_per_instruction).sum::<f64>() / arch_results.len() as f64;
            let avg_mem_bw: f64 = arch_results.iter().map(|r| r.memory_bandwidth_gbps).sum::<f64>() / arch_results.len() as f64;
            let avg_branch_acc: f64 = arch_results.iter().map(|r| r.branch_prediction_accuracy).sum::<f64>() / arch_results.len() as f64;
            let avg_power: f64 = arch_results.iter().filter_map(|r| r.power_consumption_watts).sum::<f64>() / 
                arch_results.iter().filter(|r| r.power_consumption_watts.is_some()).count() as f64;
            let avg_efficiency: f64 = arch_results.iter().filter_map(|r| r.energy_efficiency_ops_per_watt).sum::<f64>() / 
                arch_results.iter().filter(|r| r.energy_efficiency_ops_per_watt.is_some()).count() as f64;

            report.push_str(&format!(
                "| {} | {:.2} | {:.1} | {:.2} | {:.1} | {:.0} |\n",
                arch, avg_cpi, avg_mem_bw, avg_branch_acc, avg_power, avg_efficiency
            ));
        }

        report.push_str("\n");

        // Detailed analysis for each architecture
        for (arch, arch_results) in results {
            report.push_str(&format!("## {} Analysis\n\n", arch));
            
            let total_benchmarks = arch_results.len();
            let passed_benchmarks = arch_results.iter().filter(|r| r.execution_time_ns > 0).count();
            
            report.push_str(&format!("**Total Benchmarks:** {} ({})\n\n", total_benchmarks, passed_benchmarks));

            // Best performing benchmarks
            let fastest_benchmark = arch_results.iter().min_by_key(|r| r.execution_time_ns);
            if let Some(fastest) = fastest_benchmark {
                report.push_str(&format!("**Fastest Benchmark:** {} ({:.2} ns)\n", fastest.benchmark_name, fastest.execution_time_ns));
            }

            // Worst performing benchmarks
            let slowest_benchmark = arch_results.iter().max_by_key(|r| r.execution_time_ns);
            if let Some(slowest) = slowest_benchmark {
                report.push_str(&format!("**Slowest Benchmark:** {} ({:.2} ns)\n\n", slowest.benchmark_name, slowest.execution_time_ns));
            }

            report.push_str("### Detailed Results\n\n");
            for result in arch_results {
                report.push_str(&format!("#### {}\n", result.benchmark_name));
                report.push_str(&format!("- **Test Type:** {:?}\n", result.test_type));
                report.push_str(&format!("- **Execution Time:** {:.2} ns\n", result.execution_time_ns));
                report.push_str(&format!("- **Instructions/sec:** {}\n", result.instructions_per_second));
                report.push_str(&format!("- **CPI:** {:.2}\n", result.cycles_per_instruction));
                report.push_str(&format!("- **Memory BW:** {:.1} GB/s\n", result.memory_bandwidth_gbps));
                report.push_str(&format!("- **Cache Hit Rate:** {:.1}%\n", result.cache_hit_rate * 100.0));
                report.push_str(&format!("- **Branch Accuracy:** {:.1}%\n", result.branch_prediction_accuracy * 100.0));
                if let Some(power) = result.power_consumption_watts {
                    report.push_str(&format!("- **Power:** {:.1} W\n", power));
                }
                if let Some(efficiency) = result.energy_efficiency_ops_per_watt {
                    report.push_str(&format!("- **Energy Efficiency:** {:.0} ops/W\n", efficiency));
                }
                report.push_str("\n");
            }

            report.push_str("\n");
        }

        Ok(report)
    }
}

#[derive(Debug, Clone)]
struct SimulationResult {
    cycles_per_instruction: f64,
    throughput: f64,
    memory_bandwidth_gbps: f64,
    cache_hit_rate: f64,
    branch_prediction_accuracy: f64,
    power_consumption_watts: Option<f64>,
    energy_efficiency_ops_per_watt: Option<f64>,
}

/// Public API functions

/// Save benchmark results to JSON file
pub fn save_benchmark_results(results: &HashMap<Architecture, Vec<BenchmarkResult>>, output_file: &str) -> Result<()> {
    let json_data = serde_json::to_string_pretty(results)
        .context("Failed to serialize benchmark results")?;
    
    // Ensure directory exists
    if let Some(parent) = Path::new(output_file).parent() {
        fs::create_dir_all(parent)
            .context("Failed to create output directory")?;
    }
    
    fs::write(output_file, json_data)
        .context("Failed to write benchmark results")?;
    
    info!("Benchmark results saved to {}", output_file);
    Ok(())
}

/// Generate performance comparison report
pub fn generate_performance_report(results: &HashMap<Architecture, Vec<BenchmarkResult>>, output_file: &str) -> Result<String> {
    let analyzer = PerformanceAnalyzer::new();
    let report = analyzer.generate_comparison_report(results)?;
    
    // Ensure directory exists
    if let Some(parent) = Path::new(output_file).parent() {
        fs::create_dir_all(parent)
            .context("Failed to create output directory")?;
    }
    
    fs::write(output_file, report)
        .context("Failed to write performance report")?;
    
    info!("Performance report saved to {}", output_file);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_analyzer_creation() {
        let analyzer = PerformanceAnalyzer::new();
        assert_eq!(analyzer.architecture_specs.len(), 5);
    }

    #[test]
    fn test_benchmark_execution() {
        let analyzer = PerformanceAnalyzer::new();
        let arch = Architecture::X86_64;
        let benchmark = BenchmarkDefinition {
            name: "test".to_string(),
            test_type: BenchmarkType::Arithmetic,
            workload_size: 1000,
            iterations: 1,
            description: "test".to_string(),
        };
        
        let spec = ArchitectureSpec::get(&arch);
        let result = analyzer.run_single_benchmark(&arch, &spec, &benchmark).unwrap();
        assert!(result.execution_time_ns > 0);
        assert!(result.instructions_per_second > 0);
    }
}