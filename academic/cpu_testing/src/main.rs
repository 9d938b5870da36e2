//! MultiOS CPU Architecture Testing Framework
//! 
//! A comprehensive framework for testing and validating CPU architectures
//! across multiple platforms (x86_64, ARM64, RISC-V, SPARC64, PowerPC64)

use anyhow::Result;
use clap::{Arg, Command};
use log::{info, warn, error, LevelFilter};
use std::sync::Arc;
use std::collections::HashMap;
use std::path::PathBuf;

mod architecture;
mod isa_testing;
mod performance;
mod memory_hierarchy;
mod pipeline_analysis;
mod configuration;
mod comparison;
mod simulator;
mod utils;

use architecture::Architecture;
use configuration::TestConfig;
use simulator::MultiArchSimulator;
use performance::PerformanceAnalyzer;
use comparison::ArchitectureComparator;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    info!("Initializing MultiOS CPU Architecture Testing Framework");
    
    let matches = Command::new("cpu_testing")
        .version("1.0.0")
        .about("Multi-Architecture CPU Testing Framework for MultiOS Research")
        .author("MultiOS Research Team")
        .subcommand_required(true)
        .get_matches();

    match matches.subcommand() {
        Some(("simulate", args)) => run_simulation(args)?,
        Some(("test-isa", args)) => run_isa_tests(args)?,
        Some(("benchmark", args)) => run_benchmarks(args)?,
        Some(("memory", args)) => run_memory_tests(args)?,
        Some(("pipeline", args)) => run_pipeline_analysis(args)?,
        Some(("configure", args)) => run_configuration(args)?,
        Some(("compare", args)) => run_comparison(args)?,
        Some(("all", args)) => run_all_tests(args)?,
        _ => {
            eprintln!("No subcommand specified. Use --help for usage information.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_simulation(args: &clap::ArgMatches) -> Result<()> {
    let architectures = args.get_many::<String>("archs")
        .unwrap_or_default()
        .map(|s| s.parse())
        .collect::<Result<Vec<_>, _>>()?;
    
    let config_file = args.get_one::<String>("config")
        .map(|s| PathBuf::from(s))
        .unwrap_or_else(|| PathBuf::from("config/default.toml"));
    
    let output_dir = args.get_one::<String>("output")
        .map(|s| PathBuf::from(s))
        .unwrap_or_else(|| PathBuf::from("results"));
    
    info!("Starting multi-architecture simulation");
    info!("Architectures: {:?}", architectures);
    info!("Config file: {:?}", config_file);
    info!("Output directory: {:?}", output_dir);

    let config = TestConfig::load(&config_file)?;
    let simulator = MultiArchSimulator::new(config);
    
    let results = simulator.simulate(architectures)?;
    simulator.save_results(&results, &output_dir)?;

    Ok(())
}

fn run_isa_tests(args: &clap::ArgMatches) -> Result<()> {
    let architectures = args.get_many::<String>("archs")
        .unwrap_or_default()
        .map(|s| s.parse())
        .collect::<Result<Vec<_>, _>>()?;
    
    let test_suite = args.get_one::<String>("suite")
        .map(|s| s.as_str())
        .unwrap_or("basic");
    
    info!("Running ISA tests for architectures: {:?}", architectures);
    info!("Test suite: {}", test_suite);

    let results = isa_testing::run_isa_test_suite(architectures, test_suite)?;
    isa_testing::save_isa_results(&results, "results/isa_tests.json")?;

    Ok(())
}

fn run_benchmarks(args: &clap::ArgMatches) -> Result<()> {
    let architectures = args.get_many::<String>("archs")
        .unwrap_or_default()
        .map(|s| s.parse())
        .collect::<Result<Vec<_>, _>>()?;
    
    let benchmark_type = args.get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("all");
    
    info!("Running benchmarks for architectures: {:?}", architectures);
    info!("Benchmark type: {}", benchmark_type);

    let analyzer = PerformanceAnalyzer::new();
    let results = analyzer.run_benchmarks(architectures, benchmark_type)?;
    analyzer.save_benchmark_results(&results, "results/benchmarks.json")?;

    Ok(())
}

fn run_memory_tests(args: &clap::ArgMatches) -> Result<()> {
    let architectures = args.get_many::<String>("archs")
        .unwrap_or_default()
        .map(|s| s.parse())
        .collect::<Result<Vec<_>, _>>()?;
    
    let test_type = args.get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("cache");
    
    info!("Running memory hierarchy tests for architectures: {:?}", architectures);
    info!("Test type: {}", test_type);

    let results = memory_hierarchy::run_memory_tests(architectures, test_type)?;
    memory_hierarchy::save_memory_results(&results, "results/memory_tests.json")?;

    Ok(())
}

fn run_pipeline_analysis(args: &clap::ArgMatches) -> Result<()> {
    let architectures = args.get_many::<String>("archs")
        .unwrap_or_default()
        .map(|s| s.parse())
        .collect::<Result<Vec<_>, _>>()?;
    
    let analysis_type = args.get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("pipeline");
    
    info!("Running pipeline analysis for architectures: {:?}", architectures);
    info!("Analysis type: {}", analysis_type);

    let results = pipeline_analysis::run_pipeline_analysis(architectures, analysis_type)?;
    pipeline_analysis::save_pipeline_results(&results, "results/pipeline_analysis.json")?;

    Ok(())
}

fn run_configuration(args: &clap::ArgMatches) -> Result<()> {
    let config_type = args.get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("default");
    
    info!("Generating processor configuration: {}", config_type);

    configuration::generate_configuration(config_type)?;
    
    Ok(())
}

fn run_comparison(args: &clap::ArgMatches) -> Result<()> {
    let architectures = args.get_many::<String>("archs")
        .unwrap_or_default()
        .map(|s| s.parse())
        .collect::<Result<Vec<_>, _>>()?;
    
    let comparison_type = args.get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("performance");
    
    info!("Comparing architectures: {:?}", architectures);
    info!("Comparison type: {}", comparison_type);

    let comparator = ArchitectureComparator::new();
    let comparison = comparator.compare_architectures(architectures, comparison_type)?;
    comparator.save_comparison_report(&comparison, "results/comparison_report.md")?;

    Ok(())
}

fn run_all_tests(args: &clap::ArgMatches) -> Result<()> {
    let architectures = args.get_many::<String>("archs")
        .unwrap_or_default()
        .map(|s| s.parse())
        .collect::<Result<Vec<_>, _>>()?;
    
    let output_dir = args.get_one::<String>("output")
        .map(|s| PathBuf::from(s))
        .unwrap_or_else(|| PathBuf::from("results"));
    
    info!("Running comprehensive test suite for architectures: {:?}", architectures);

    let simulator = MultiArchSimulator::new(TestConfig::default());
    let analyzer = PerformanceAnalyzer::new();
    let comparator = ArchitectureComparator::new();

    // Run all test suites
    let simulation_results = simulator.simulate(architectures.clone())?;
    let isa_results = isa_testing::run_isa_test_suite(architectures.clone(), "comprehensive")?;
    let benchmark_results = analyzer.run_benchmarks(architectures.clone(), "all")?;
    let memory_results = memory_hierarchy::run_memory_tests(architectures.clone(), "all")?;
    let pipeline_results = pipeline_analysis::run_pipeline_analysis(architectures.clone(), "all")?;

    // Generate comprehensive report
    let comparison = comparator.compare_architectures(architectures, "comprehensive")?;
    
    // Save all results
    simulator.save_results(&simulation_results, &output_dir)?;
    isa_testing::save_isa_results(&isa_results, output_dir.join("isa_tests.json").to_str().unwrap())?;
    analyzer.save_benchmark_results(&benchmark_results, output_dir.join("benchmarks.json").to_str().unwrap())?;
    memory_hierarchy::save_memory_results(&memory_results, output_dir.join("memory_tests.json").to_str().unwrap())?;
    pipeline_analysis::save_pipeline_results(&pipeline_results, output_dir.join("pipeline_analysis.json").to_str().unwrap())?;
    comparator.save_comparison_report(&comparison, output_dir.join("comprehensive_report.md").to_str().unwrap())?;

    info!("Comprehensive test suite completed. Results saved to {:?}", output_dir);

    Ok(())
}