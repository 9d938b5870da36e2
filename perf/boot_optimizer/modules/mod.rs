use std::time::{Duration, Instant};
use std::collections::{HashMap, HashSet, BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub struct KernelModule {
    pub name: String,
    pub dependencies: Vec<String>,
    pub load_time: Duration,
    pub size: u64,
    pub priority: ModulePriority,
    pub load_context: LoadContext,
    pub critical: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModulePriority {
    Critical,
    High,
    Medium,
    Low,
    Lazy,
}

#[derive(Clone, Debug)]
pub enum LoadContext {
    EarlyBoot,
    MainBoot,
    PostBoot,
    OnDemand,
}

#[derive(Clone, Debug)]
pub struct ModuleLoadPlan {
    pub modules: Vec<KernelModule>,
    pub load_order: Vec<String>,
    pub parallel_groups: Vec<Vec<String>>,
    pub estimated_time: Duration,
}

#[derive(Clone, Debug)]
pub struct ModuleLoadMetrics {
    pub modules_loaded: usize,
    pub total_load_time: Duration,
    pub parallel_efficiency: f64,
    pub dependency_resolutions: usize,
    pub failed_loads: Vec<String>,
}

pub struct ModuleOptimizer {
    modules: Arc<Mutex<HashMap<String, KernelModule>>>,
    dependency_graph: Arc<Mutex<DependencyGraph>>,
    load_history: Arc<Mutex<Vec<ModuleLoadMetrics>>>,
    config: ModuleOptimizationConfig,
}

#[derive(Clone)]
pub struct ModuleOptimizationConfig {
    pub enable_parallel_loading: bool,
    pub parallel_groups: usize,
    pub lazy_loading_threshold: Duration,
    pub preload_critical_modules: bool,
    pub optimize_dependency_order: bool,
    pub aggressive_optimization: bool,
}

impl Default for ModuleOptimizationConfig {
    fn default() -> Self {
        Self {
            enable_parallel_loading: true,
            parallel_groups: 4,
            lazy_loading_threshold: Duration::from_millis(50),
            preload_critical_modules: true,
            optimize_dependency_order: true,
            aggressive_optimization: false,
        }
    }
}

struct DependencyGraph {
    modules: HashMap<String, KernelModule>,
    edges: HashMap<String, HashSet<String>>, // module -> dependencies
}

impl DependencyGraph {
    fn new() -> Self {
        Self {
            modules: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    fn add_module(&mut self, module: KernelModule) {
        self.modules.insert(module.name.clone(), module.clone());
        self.edges.insert(module.name.clone(), module.dependencies.iter().cloned().collect());
    }

    fn get_load_order(&self) -> Result<Vec<String>, String> {
        // Topological sort to determine safe loading order
        let mut in_degree: HashMap<String, usize> = HashMap::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut result = Vec::new();

        // Calculate in-degrees
        for (module_name, deps) in &self.edges {
            in_degree.entry(module_name.clone()).or_insert(0);
            for dep in deps {
                *in_degree.entry(dep.clone()).or_insert(0) += 1;
            }
        }

        // Find modules with no dependencies
        for (module_name, &degree) in &in_degree {
            if degree == 0 {
                queue.push_back(module_name.clone());
            }
        }

        // Process queue
        while let Some(module_name) = queue.pop_front() {
            result.push(module_name.clone());

            // Remove edges from this module
            if let Some(deps) = self.edges.get(&module_name) {
                for dep in deps {
                    if let Some(&mut ref mut degree) = in_degree.get_mut(dep) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(dep.clone());
                        }
                    }
                }
            }
        }

        // Check for cycles
        if result.len() != self.modules.len() {
            return Err("Circular dependency detected".to_string());
        }

        Ok(result)
    }

    fn find_parallel_groups(&self, load_order: &[String]) -> Vec<Vec<String>> {
        let mut groups = Vec::new();
        let mut current_group = Vec::new();
        let mut processed = HashSet::new();

        for module_name in load_order {
            if processed.contains(module_name) {
                continue;
            }

            let module = match self.modules.get(module_name) {
                Some(m) => m,
                None => continue,
            };

            // Check if this module can be loaded in parallel with current group
            let can_add_to_group = current_group.iter().all(|other| {
                self.can_load_parallel(module, other)
            });

            if can_add_to_group && current_group.len() < 4 {
                current_group.push(module_name.clone());
                processed.insert(module_name.clone());
            } else {
                if !current_group.is_empty() {
                    groups.push(current_group.clone());
                }
                current_group.clear();
                current_group.push(module_name.clone());
                processed.insert(module_name.clone());
            }
        }

        if !current_group.is_empty() {
            groups.push(current_group);
        }

        groups
    }

    fn can_load_parallel(&self, module1: &KernelModule, module2: &KernelModule) -> bool {
        // Modules can be loaded in parallel if they don't depend on each other
        // and neither is critical
        let mut module1_deps = HashSet::new();
        module1_deps.extend(&module1.dependencies);
        
        let mut module2_deps = HashSet::new();
        module2_deps.extend(&module2.dependencies);

        // Check if module1 depends on module2
        if module1_deps.contains(&module2.name) {
            return false;
        }

        // Check if module2 depends on module1
        if module2_deps.contains(&module1.name) {
            return false;
        }

        // Critical modules should not be parallelized
        if module1.critical || module2.critical {
            return false;
        }

        true
    }
}

impl ModuleOptimizer {
    pub fn new() -> Self {
        Self {
            modules: Arc::new(Mutex::new(HashMap::new())),
            dependency_graph: Arc::new(Mutex::new(DependencyGraph::new())),
            load_history: Arc::new(Mutex::new(Vec::new())),
            config: ModuleOptimizationConfig::default(),
        }
    }

    pub fn configure(&mut self, config: ModuleOptimizationConfig) {
        self.config = config;
    }

    pub fn add_module(&self, module: KernelModule) {
        let mut modules = self.modules.lock().unwrap();
        modules.insert(module.name.clone(), module.clone());
        
        let mut graph = self.dependency_graph.lock().unwrap();
        graph.add_module(module);
    }

    pub fn optimize_loading(&self) -> Result<ModuleLoadPlan, String> {
        let graph = self.dependency_graph.lock().unwrap();
        let load_order = graph.get_load_order()?;
        
        let mut parallel_groups = Vec::new();
        if self.config.enable_parallel_loading {
            parallel_groups = graph.find_parallel_groups(&load_order);
        }

        // Calculate estimated time
        let estimated_time = self.calculate_estimated_time(&load_order, &parallel_groups);

        // Get all modules
        let modules: Vec<KernelModule> = graph.modules.values().cloned().collect();

        Ok(ModuleLoadPlan {
            modules,
            load_order,
            parallel_groups,
            estimated_time,
        })
    }

    pub fn create_optimization_report(&self) -> ModuleOptimizationReport {
        let graph = self.dependency_graph.lock().unwrap();
        let modules = graph.modules.values().cloned().collect::<Vec<_>>();
        
        let mut report = ModuleOptimizationReport::new();
        
        // Analyze critical modules
        let critical_modules: Vec<_> = modules.iter()
            .filter(|m| m.critical)
            .collect();
        
        for module in critical_modules {
            report.add_critical_module(module.name.clone(), module.dependencies.clone());
        }
        
        // Analyze dependency depth
        let max_depth = self.calculate_max_dependency_depth();
        report.dependency_depth = max_depth;
        
        // Analyze loading patterns
        let total_size: u64 = modules.iter().map(|m| m.size).sum();
        let avg_load_time = if !modules.is_empty() {
            modules.iter().map(|m| m.load_time).sum::<Duration>() / modules.len() as u32
        } else {
            Duration::from_millis(0)
        };
        
        report.total_size = total_size;
        report.average_load_time = avg_load_time;
        
        // Generate optimization suggestions
        let suggestions = self.generate_optimization_suggestions(&modules);
        report.optimization_suggestions = suggestions;
        
        report
    }

    fn calculate_estimated_time(&self, load_order: &[String], parallel_groups: &[Vec<String>]) -> Duration {
        let modules = self.modules.lock().unwrap();
        
        if self.config.enable_parallel_loading && !parallel_groups.is_empty() {
            // Calculate time with parallelization
            let mut total_time = Duration::from_millis(0);
            
            for group in parallel_groups {
                let group_time: Duration = group.iter()
                    .filter_map(|name| modules.get(name))
                    .map(|m| m.load_time)
                    .max()
                    .unwrap_or_default();
                
                total_time += group_time;
            }
            
            total_time
        } else {
            // Calculate time without parallelization
            load_order.iter()
                .filter_map(|name| modules.get(name))
                .map(|m| m.load_time)
                .sum()
        }
    }

    fn calculate_max_dependency_depth(&self) -> usize {
        let graph = self.dependency_graph.lock().unwrap();
        
        let mut max_depth = 0;
        
        for module_name in graph.modules.keys() {
            let depth = self.calculate_depth(module_name, &graph, &mut HashSet::new());
            max_depth = max_depth.max(depth);
        }
        
        max_depth
    }

    fn calculate_depth(&self, module_name: &str, graph: &DependencyGraph, visited: &mut HashSet<String>) -> usize {
        if visited.contains(module_name) {
            return 0; // Avoid infinite recursion
        }
        
        visited.insert(module_name.to_string());
        
        if let Some(module) = graph.modules.get(module_name) {
            if module.dependencies.is_empty() {
                return 1;
            }
            
            let max_child_depth = module.dependencies.iter()
                .map(|dep| self.calculate_depth(dep, graph, visited))
                .max()
                .unwrap_or(0);
            
            1 + max_child_depth
        } else {
            1
        }
    }

    fn generate_optimization_suggestions(&self, modules: &[KernelModule]) -> Vec<ModuleOptimizationSuggestion> {
        let mut suggestions = Vec::new();
        
        // Check for high-priority lazy-loaded modules
        let lazy_critical: Vec<_> = modules.iter()
            .filter(|m| m.priority == ModulePriority::Critical && m.load_context == LoadContext::OnDemand)
            .collect();
        
        if !lazy_critical.is_empty() {
            suggestions.push(ModuleOptimizationSuggestion {
                module_type: "Critical Lazy Loading".to_string(),
                suggestion: "Some critical modules are set to lazy loading. Consider moving them to early boot for faster initialization".to_string(),
                expected_improvement: Duration::from_millis(100 * lazy_critical.len() as u32),
                risk_level: "Low".to_string(),
            });
        }
        
        // Check for modules with many dependencies
        let high_dependency_modules: Vec<_> = modules.iter()
            .filter(|m| m.dependencies.len() > 5)
            .collect();
        
        if !high_dependency_modules.is_empty() {
            suggestions.push(ModuleOptimizationSuggestion {
                module_type: "High Dependency Count".to_string(),
                suggestion: format!("Found {} modules with high dependency count. Consider refactoring dependencies", high_dependency_modules.len()),
                expected_improvement: Duration::from_millis(50 * high_dependency_modules.len() as u32),
                risk_level: "Medium".to_string(),
            });
        }
        
        // Check for large modules
        let large_modules: Vec<_> = modules.iter()
            .filter(|m| m.size > 1024 * 1024) // > 1MB
            .collect();
        
        if !large_modules.is_empty() {
            suggestions.push(ModuleOptimizationSuggestion {
                module_type: "Large Module Size".to_string(),
                suggestion: format!("Found {} large modules. Consider compressing or splitting them", large_modules.len()),
                expected_improvement: Duration::from_millis(30 * large_modules.len() as u32),
                risk_level: "Low".to_string(),
            });
        }
        
        suggestions
    }

    pub fn simulate_load(&self, plan: &ModuleLoadPlan) -> ModuleLoadMetrics {
        let start_time = Instant::now();
        let mut modules_loaded = 0;
        let mut dependency_resolutions = 0;
        let mut failed_loads = Vec::new();
        
        // Simulate parallel loading if enabled
        if self.config.enable_parallel_loading && !plan.parallel_groups.is_empty() {
            for group in &plan.parallel_groups {
                let group_start = Instant::now();
                
                // Simulate loading all modules in parallel
                for module_name in group {
                    if let Some(module) = self.modules.lock().unwrap().get(module_name) {
                        // Simulate module loading
                        std::thread::sleep(module.load_time.min(Duration::from_millis(10))); // Reduced for simulation
                        modules_loaded += 1;
                        dependency_resolutions += module.dependencies.len();
                    } else {
                        failed_loads.push(module_name.clone());
                    }
                }
                
                let group_time = group_start.elapsed();
                println!("Parallel group loaded in {:?}", group_time);
            }
        } else {
            // Simulate sequential loading
            for module_name in &plan.load_order {
                if let Some(module) = self.modules.lock().unwrap().get(module_name) {
                    std::thread::sleep(module.load_time.min(Duration::from_millis(10))); // Reduced for simulation
                    modules_loaded += 1;
                    dependency_resolutions += module.dependencies.len();
                } else {
                    failed_loads.push(module_name.clone());
                }
            }
        }
        
        let total_time = start_time.elapsed();
        let parallel_efficiency = if self.config.enable_parallel_loading {
            // Calculate efficiency based on theoretical serial time
            let serial_time: Duration = plan.load_order.iter()
                .filter_map(|name| self.modules.lock().unwrap().get(name))
                .map(|m| m.load_time)
                .sum();
            
            if serial_time > Duration::from_millis(0) {
                serial_time.as_millis() as f64 / total_time.as_millis() as f64
            } else {
                0.0
            }
        } else {
            1.0
        };
        
        let metrics = ModuleLoadMetrics {
            modules_loaded,
            total_load_time: total_time,
            parallel_efficiency,
            dependency_resolutions,
            failed_loads,
        };
        
        // Store metrics in history
        let mut history = self.load_history.lock().unwrap();
        history.push(metrics.clone());
        
        metrics
    }
}

pub struct ModuleOptimizationReport {
    pub critical_modules: Vec<(String, Vec<String>)>,
    pub dependency_depth: usize,
    pub total_size: u64,
    pub average_load_time: Duration,
    pub optimization_suggestions: Vec<ModuleOptimizationSuggestion>,
}

#[derive(Clone, Debug)]
pub struct ModuleOptimizationSuggestion {
    pub module_type: String,
    pub suggestion: String,
    pub expected_improvement: Duration,
    pub risk_level: String,
}

impl ModuleOptimizationReport {
    fn new() -> Self {
        Self {
            critical_modules: Vec::new(),
            dependency_depth: 0,
            total_size: 0,
            average_load_time: Duration::from_millis(0),
            optimization_suggestions: Vec::new(),
        }
    }

    fn add_critical_module(&mut self, name: String, dependencies: Vec<String>) {
        self.critical_modules.push((name, dependencies));
    }

    pub fn get_critical_modules_count(&self) -> usize {
        self.critical_modules.len()
    }

    pub fn get_optimization_potential(&self) -> Duration {
        self.optimization_suggestions
            .iter()
            .map(|s| s.expected_improvement)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_optimizer_creation() {
        let optimizer = ModuleOptimizer::new();
        let report = optimizer.create_optimization_report();
        assert_eq!(report.get_critical_modules_count(), 0);
    }

    #[test]
    fn test_module_addition() {
        let optimizer = ModuleOptimizer::new();
        
        let module = KernelModule {
            name: "test_module".to_string(),
            dependencies: vec![],
            load_time: Duration::from_millis(50),
            size: 1024,
            priority: ModulePriority::High,
            load_context: LoadContext::EarlyBoot,
            critical: false,
        };
        
        optimizer.add_module(module);
        
        let plan = optimizer.optimize_loading().unwrap();
        assert_eq!(plan.modules.len(), 1);
        assert_eq!(plan.load_order[0], "test_module");
    }

    #[test]
    fn test_dependency_graph_load_order() {
        let mut graph = DependencyGraph::new();
        
        let module1 = KernelModule {
            name: "module1".to_string(),
            dependencies: vec![],
            load_time: Duration::from_millis(10),
            size: 100,
            priority: ModulePriority::High,
            load_context: LoadContext::EarlyBoot,
            critical: false,
        };
        
        let module2 = KernelModule {
            name: "module2".to_string(),
            dependencies: vec!["module1".to_string()],
            load_time: Duration::from_millis(20),
            size: 200,
            priority: ModulePriority::Medium,
            load_context: LoadContext::MainBoot,
            critical: false,
        };
        
        graph.add_module(module1);
        graph.add_module(module2);
        
        let load_order = graph.get_load_order().unwrap();
        assert_eq!(load_order[0], "module1");
        assert_eq!(load_order[1], "module2");
    }
}
