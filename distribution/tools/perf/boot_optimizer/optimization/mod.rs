use std::time::{Duration, Instant};
use std::collections::{HashMap, BTreeSet};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub struct BootPhaseOptimization {
    pub phase_name: String,
    pub current_time: Duration,
    pub target_time: Duration,
    pub optimizations: Vec<OptimizationStrategy>,
    pub applied: bool,
}

#[derive(Clone, Debug)]
pub struct OptimizationStrategy {
    pub name: String,
    pub description: String,
    pub expected_improvement: Duration,
    pub risk_level: RiskLevel,
    pub implementation: OptimizationImplementation,
}

#[derive(Clone, Debug)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug)]
pub enum OptimizationImplementation {
    ConfigurationChange(String),
    CodeModification(String),
    Parallelization(Vec<String>),
    Caching(String),
    Preloading(String),
}

pub struct BootPhaseOptimizer {
    optimizations: Arc<Mutex<HashMap<String, BootPhaseOptimization>>>,
    config: Arc<Mutex<OptimizationConfig>>,
}

#[derive(Clone)]
pub struct OptimizationConfig {
    pub target_firmware_time: Duration,
    pub target_bootloader_time: Duration,
    pub target_kernel_time: Duration,
    pub enable_parallel_boot: bool,
    pub enable_module_optimization: bool,
    pub enable_cold_boot_optimization: bool,
    pub risk_tolerance: RiskLevel,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            target_firmware_time: Duration::from_millis(300),
            target_bootloader_time: Duration::from_millis(200),
            target_kernel_time: Duration::from_millis(400),
            enable_parallel_boot: true,
            enable_module_optimization: true,
            enable_cold_boot_optimization: true,
            risk_tolerance: RiskLevel::Low,
        }
    }
}

impl BootPhaseOptimizer {
    pub fn new() -> Self {
        Self {
            optimizations: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(Mutex::new(OptimizationConfig::default())),
        }
    }

    pub fn configure(&mut self, config: OptimizationConfig) {
        *self.config.lock().unwrap() = config;
    }

    pub fn analyze_and_optimize_phase(&self, phase_name: &str, current_time: Duration) -> BootPhaseOptimization {
        let config = self.config.lock().unwrap();
        let target_time = match phase_name {
            "firmware" => config.target_firmware_time,
            "bootloader" => config.target_bootloader_time,
            "kernel_init" => config.target_kernel_time,
            _ => Duration::from_millis(500),
        };

        let optimization = BootPhaseOptimization {
            phase_name: phase_name.to_string(),
            current_time,
            target_time,
            optimizations: self.generate_optimizations(phase_name, current_time, &config),
            applied: false,
        };

        let mut optimizations = self.optimizations.lock().unwrap();
        optimizations.insert(phase_name.to_string(), optimization.clone());
        
        optimization
    }

    fn generate_optimizations(&self, phase_name: &str, current_time: Duration, config: &OptimizationConfig) -> Vec<OptimizationStrategy> {
        let mut optimizations = Vec::new();
        let time_overrun = current_time.saturating_sub(self.get_target_for_phase(phase_name, config));

        match phase_name {
            "firmware" => {
                if time_overrun > Duration::from_millis(100) {
                    optimizations.push(OptimizationStrategy {
                        name: "Fast Boot Mode".to_string(),
                        description: "Enable BIOS/UEFI fast boot mode to skip non-essential hardware checks".to_string(),
                        expected_improvement: Duration::from_millis(150),
                        risk_level: RiskLevel::Low,
                        implementation: OptimizationImplementation::ConfigurationChange("bios_fast_boot=true".to_string()),
                    });

                    optimizations.push(OptimizationStrategy {
                        name: "Disable USB Legacy Support".to_string(),
                        description: "Disable legacy USB support to speed up enumeration".to_string(),
                        expected_improvement: Duration::from_millis(80),
                        risk_level: RiskLevel::Medium,
                        implementation: OptimizationImplementation::ConfigurationChange("usb_legacy_support=disabled".to_string()),
                    });
                }
            },
            "bootloader" => {
                optimizations.push(OptimizationStrategy {
                    name: "Parallel Module Loading".to_string(),
                    description: "Load bootloader modules in parallel instead of sequentially".to_string(),
                    expected_improvement: Duration::from_millis(100),
                    risk_level: RiskLevel::Low,
                    implementation: OptimizationImplementation::Parallelization(vec![
                        "vmlinuz_loading".to_string(),
                        "initrd_loading".to_string(),
                        "config_parsing".to_string(),
                    ]),
                });

                optimizations.push(OptimizationStrategy {
                    name: "Compressed Kernel Preloading".to_string(),
                    description: "Preload compressed kernel and initrd into memory".to_string(),
                    expected_improvement: Duration::from_millis(60),
                    risk_level: RiskLevel::Low,
                    implementation: OptimizationImplementation::Preloading("kernel_preload_cache".to_string()),
                });
            },
            "kernel_init" => {
                if config.enable_parallel_boot {
                    optimizations.push(OptimizationStrategy {
                        name: "Parallel Device Initialization".to_string(),
                        description: "Initialize devices in parallel when safe dependencies allow".to_string(),
                        expected_improvement: Duration::from_millis(200),
                        risk_level: RiskLevel::Medium,
                        implementation: OptimizationImplementation::Parallelization(vec![
                            "pci_enumeration".to_string(),
                            "usb_enumeration".to_string(),
                            "network_init".to_string(),
                        ]),
                    });
                }

                if config.enable_module_optimization {
                    optimizations.push(OptimizationStrategy {
                        name: "Module Dependency Optimization".to_string(),
                        description: "Optimize module loading order based on dependency graph".to_string(),
                        expected_improvement: Duration::from_millis(120),
                        risk_level: RiskLevel::Low,
                        implementation: OptimizationImplementation::ConfigurationChange("module_load_order=optimized".to_string()),
                    });

                    optimizations.push(OptimizationStrategy {
                        name: "Lazy Module Loading".to_string(),
                        description: "Load non-critical modules only when needed".to_string(),
                        expected_improvement: Duration::from_millis(80),
                        risk_level: RiskLevel::Low,
                        implementation: OptimizationImplementation::ConfigurationChange("lazy_module_loading=true".to_string()),
                    });
                }
            },
            _ => {}
        }

        // Add general optimizations based on risk tolerance
        if config.risk_tolerance != RiskLevel::Low {
            optimizations.push(OptimizationStrategy {
                name: "Aggressive Caching".to_string(),
                description: "Enable aggressive memory and disk caching during boot".to_string(),
                expected_improvement: Duration::from_millis(50),
                risk_level: config.risk_tolerance.clone(),
                implementation: OptimizationImplementation::Caching("aggressive_boot_cache".to_string()),
            });
        }

        optimizations
    }

    fn get_target_for_phase(&self, phase_name: &str, config: &OptimizationConfig) -> Duration {
        match phase_name {
            "firmware" => config.target_firmware_time,
            "bootloader" => config.target_bootloader_time,
            "kernel_init" => config.target_kernel_time,
            _ => Duration::from_millis(500),
        }
    }

    pub fn apply_optimization(&self, phase_name: &str, strategy_name: &str) -> Result<(), String> {
        let optimizations = self.optimizations.lock().unwrap();
        
        if let Some(optimization) = optimizations.get(phase_name) {
            for strategy in &optimization.optimizations {
                if strategy.name == strategy_name {
                    return self.execute_optimization(strategy);
                }
            }
            return Err(format!("Optimization strategy '{}' not found for phase '{}'", strategy_name, phase_name));
        }
        
        Err(format!("Phase '{}' not found", phase_name))
    }

    fn execute_optimization(&self, strategy: &OptimizationStrategy) -> Result<(), String> {
        match &strategy.implementation {
            OptimizationImplementation::ConfigurationChange(config) => {
                // Apply configuration changes
                println!("Applying configuration: {}", config);
                Ok(())
            },
            OptimizationImplementation::CodeModification(code) => {
                // Apply code modifications
                println!("Applying code modification: {}", code);
                Ok(())
            },
            OptimizationImplementation::Parallelization(tasks) => {
                // Implement parallelization
                println!("Implementing parallelization for tasks: {:?}", tasks);
                Ok(())
            },
            OptimizationImplementation::Caching(cache_type) => {
                // Set up caching
                println!("Setting up cache: {}", cache_type);
                Ok(())
            },
            OptimizationImplementation::Preloading(preload_target) => {
                // Set up preloading
                println!("Setting up preloading: {}", preload_target);
                Ok(())
            },
        }
    }

    pub fn get_optimization_report(&self) -> OptimizationReport {
        let optimizations = self.optimizations.lock().unwrap();
        
        let mut report = OptimizationReport::new();
        
        for (phase_name, optimization) in optimizations.iter() {
            let total_improvement = optimization.optimizations
                .iter()
                .map(|s| s.expected_improvement)
                .sum();
            
            report.add_phase_report(PhaseOptimizationReport {
                phase_name: phase_name.clone(),
                current_time: optimization.current_time,
                target_time: optimization.target_time,
                total_potential_improvement: total_improvement,
                applied_optimizations: optimization.applied,
                risk_assessment: self.assess_risk(&optimization.optimizations),
            });
        }
        
        report
    }

    fn assess_risk(&self, strategies: &[OptimizationStrategy]) -> f64 {
        let risk_scores = strategies.iter().map(|s| match s.risk_level {
            RiskLevel::Low => 0.2,
            RiskLevel::Medium => 0.5,
            RiskLevel::High => 0.8,
        });
        
        risk_scores.sum::<f64>() / strategies.len() as f64
    }
}

pub struct OptimizationReport {
    phase_reports: Vec<PhaseOptimizationReport>,
    overall_score: f64,
}

#[derive(Clone)]
pub struct PhaseOptimizationReport {
    pub phase_name: String,
    pub current_time: Duration,
    pub target_time: Duration,
    pub total_potential_improvement: Duration,
    pub applied_optimizations: bool,
    pub risk_assessment: f64,
}

impl OptimizationReport {
    fn new() -> Self {
        Self {
            phase_reports: Vec::new(),
            overall_score: 0.0,
        }
    }

    fn add_phase_report(&mut self, report: PhaseOptimizationReport) {
        self.phase_reports.push(report);
    }

    pub fn get_phase_reports(&self) -> &[PhaseOptimizationReport] {
        &self.phase_reports
    }

    pub fn get_critical_phases(&self) -> Vec<&PhaseOptimizationReport> {
        self.phase_reports
            .iter()
            .filter(|r| r.current_time > r.target_time)
            .collect()
    }

    pub fn get_total_potential_improvement(&self) -> Duration {
        self.phase_reports
            .iter()
            .map(|r| r.total_potential_improvement)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimization_creation() {
        let optimizer = BootPhaseOptimizer::new();
        let optimization = optimizer.analyze_and_optimize_phase("kernel_init", Duration::from_millis(600));
        assert_eq!(optimization.phase_name, "kernel_init");
        assert!(!optimization.optimizations.is_empty());
    }

    #[test]
    fn test_risk_level() {
        let config = OptimizationConfig {
            risk_tolerance: RiskLevel::High,
            ..Default::default()
        };
        assert_eq!(config.risk_tolerance, RiskLevel::High);
    }
}
