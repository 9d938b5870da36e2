use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use std::collections::{HashMap, BTreeMap};

#[derive(Clone)]
pub struct BootMetrics {
    pub firmware_time: Duration,
    pub bootloader_time: Duration,
    pub kernel_init_time: Duration,
    pub device_init_time: Duration,
    pub service_start_time: Duration,
    pub total_time: Duration,
}

#[derive(Clone)]
pub struct BootConfiguration {
    pub target_boot_time: Duration,
    pub parallel_enabled: bool,
    pub module_optimization: bool,
    pub device_prioritization: bool,
    pub cold_boot_optimization: bool,
}

pub struct BootOptimizer {
    config: BootConfiguration,
    metrics: Arc<Mutex<BootMetrics>>,
    profiling_data: Arc<Mutex<Vec<BootProfilingEntry>>>,
}

#[derive(Clone)]
pub struct BootProfilingEntry {
    pub phase: String,
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub duration: Option<Duration>,
    pub parallel: bool,
}

impl BootOptimizer {
    pub fn new() -> Self {
        Self {
            config: BootConfiguration {
                target_boot_time: Duration::from_millis(2000),
                parallel_enabled: true,
                module_optimization: true,
                device_prioritization: true,
                cold_boot_optimization: true,
            },
            metrics: Arc::new(Mutex::new(BootMetrics {
                firmware_time: Duration::from_millis(0),
                bootloader_time: Duration::from_millis(0),
                kernel_init_time: Duration::from_millis(0),
                device_init_time: Duration::from_millis(0),
                service_start_time: Duration::from_millis(0),
                total_time: Duration::from_millis(0),
            })),
            profiling_data: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn configure(&mut self, config: BootConfiguration) {
        self.config = config;
    }

    pub fn start_boot_measurement(&self) -> BootProfilingEntry {
        let entry = BootProfilingEntry {
            phase: String::from("total_boot"),
            start_time: Instant::now(),
            end_time: None,
            duration: None,
            parallel: false,
        };
        
        let mut data = self.profiling_data.lock().unwrap();
        data.push(entry.clone());
        entry
    }

    pub fn measure_firmware_phase(&self) -> BootProfilingEntry {
        let entry = BootProfilingEntry {
            phase: String::from("firmware"),
            start_time: Instant::now(),
            end_time: None,
            duration: None,
            parallel: false,
        };
        
        let mut data = self.profiling_data.lock().unwrap();
        data.push(entry.clone());
        entry
    }

    pub fn measure_bootloader_phase(&self) -> BootProfilingEntry {
        let entry = BootProfilingEntry {
            phase: String::from("bootloader"),
            start_time: Instant::now(),
            end_time: None,
            duration: None,
            parallel: self.config.parallel_enabled,
        };
        
        let mut data = self.profiling_data.lock().unwrap();
        data.push(entry.clone());
        entry
    }

    pub fn measure_kernel_phase(&self) -> BootProfilingEntry {
        let entry = BootProfilingEntry {
            phase: String::from("kernel_init"),
            start_time: Instant::now(),
            end_time: None,
            duration: None,
            parallel: self.config.parallel_enabled,
        };
        
        let mut data = self.profiling_data.lock().unwrap();
        data.push(entry.clone());
        entry
    }

    pub fn measure_device_init_phase(&self) -> BootProfilingEntry {
        let entry = BootProfilingEntry {
            phase: String::from("device_init"),
            start_time: Instant::now(),
            end_time: None,
            duration: None,
            parallel: self.config.parallel_enabled,
        };
        
        let mut data = self.profiling_data.lock().unwrap();
        data.push(entry.clone());
        entry
    }

    pub fn finalize_phase(&self, entry: BootProfilingEntry) {
        let end_time = Instant::now();
        let duration = end_time.duration_since(entry.start_time);
        
        let mut data = self.profiling_data.lock().unwrap();
        for e in data.iter_mut() {
            if e.phase == entry.phase && e.start_time == entry.start_time {
                e.end_time = Some(end_time);
                e.duration = Some(duration);
                break;
            }
        }
    }

    pub fn update_metrics(&self, metrics: BootMetrics) {
        let mut m = self.metrics.lock().unwrap();
        *m = metrics;
    }

    pub fn get_metrics(&self) -> BootMetrics {
        self.metrics.lock().unwrap().clone()
    }

    pub fn get_profiling_data(&self) -> Vec<BootProfilingEntry> {
        self.profiling_data.lock().unwrap().clone()
    }

    pub fn optimize_boot_process(&self) -> BootOptimizationReport {
        let profiling = self.get_profiling_data();
        let metrics = self.get_metrics();
        
        let mut report = BootOptimizationReport::new();
        
        // Analyze firmware phase
        if metrics.firmware_time > Duration::from_millis(500) {
            report.add_optimization("firmware", "Firmware initialization is slow. Consider optimizing BIOS/UEFI settings or using faster firmware.");
        }
        
        // Analyze bootloader phase
        if metrics.bootloader_time > Duration::from_millis(300) {
            report.add_optimization("bootloader", "Bootloader loading is slow. Consider parallel loading or simplified configuration.");
        }
        
        // Analyze kernel phase
        if metrics.kernel_init_time > Duration::from_millis(400) {
            report.add_optimization("kernel", "Kernel initialization is slow. Consider module optimization or parallel initialization.");
        }
        
        // Analyze device initialization
        if metrics.device_init_time > Duration::from_millis(800) {
            report.add_optimization("device_init", "Device initialization is slow. Consider parallel device enumeration and prioritized initialization.");
        }
        
        // Check total boot time
        if metrics.total_time > self.config.target_boot_time {
            report.add_optimization("total", "Total boot time exceeds target. Consider aggressive parallelization and optimization.");
        }
        
        report
    }
}

pub struct BootOptimizationReport {
    optimizations: HashMap<String, Vec<String>>,
    performance_score: f64,
}

impl BootOptimizationReport {
    fn new() -> Self {
        Self {
            optimizations: HashMap::new(),
            performance_score: 0.0,
        }
    }
    
    fn add_optimization(&mut self, phase: &str, suggestion: &str) {
        self.optimizations
            .entry(phase.to_string())
            .or_insert_with(Vec::new)
            .push(suggestion.to_string());
    }
    
    pub fn get_optimizations(&self) -> &HashMap<String, Vec<String>> {
        &self.optimizations
    }
    
    pub fn get_performance_score(&self) -> f64 {
        self.performance_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_boot_optimizer_creation() {
        let optimizer = BootOptimizer::new();
        assert_eq!(optimizer.config.target_boot_time, Duration::from_millis(2000));
    }
    
    #[test]
    fn test_boot_measurement() {
        let optimizer = BootOptimizer::new();
        let entry = optimizer.start_boot_measurement();
        assert_eq!(entry.phase, "total_boot");
        assert!(entry.duration.is_none());
        
        optimizer.finalize_phase(entry.clone());
        let profiling = optimizer.get_profiling_data();
        assert_eq!(profiling.len(), 1);
        assert!(profiling[0].duration.is_some());
    }
}
