use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::{Duration, Instant};
use std::collections::{HashMap, HashSet, BTreeMap};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ParallelBootTask {
    pub id: String,
    pub name: String,
    pub dependencies: Vec<String>,
    pub estimated_duration: Duration,
    pub critical_path: bool,
    pub parallel_safe: bool,
    pub execution_context: TaskContext,
}

#[derive(Clone, Debug)]
pub enum TaskContext {
    KernelSpace,
    UserSpace,
    HardwareInit,
    ServiceStart,
}

#[derive(Clone, Debug)]
pub struct TaskExecutionResult {
    pub task_id: String,
    pub start_time: Instant,
    pub end_time: Instant,
    pub duration: Duration,
    pub success: bool,
    pub error_message: Option<String>,
}

pub struct ParallelBootManager {
    tasks: Arc<Mutex<HashMap<String, ParallelBootTask>>>,
    execution_graph: Arc<Mutex<ExecutionGraph>>,
    active_tasks: Arc<Mutex<HashSet<String>>>,
    completed_tasks: Arc<Mutex<HashSet<String>>>,
    execution_results: Arc<Mutex<Vec<TaskExecutionResult>>>,
    is_running: Arc<AtomicBool>,
    parallel_workers: usize,
}

#[derive(Clone, Debug)]
struct ExecutionGraph {
    nodes: HashMap<String, ParallelBootTask>,
    edges: HashMap<String, HashSet<String>>, // task -> dependencies
}

impl ExecutionGraph {
    fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    fn add_task(&mut self, task: ParallelBootTask) {
        self.nodes.insert(task.id.clone(), task.clone());
        self.edges.insert(task.id.clone(), task.dependencies.iter().cloned().collect());
    }

    fn get_ready_tasks(&self) -> Vec<String> {
        let mut ready_tasks = Vec::new();
        
        for (task_id, deps) in &self.edges {
            if deps.is_empty() {
                ready_tasks.push(task_id.clone());
            } else {
                // Check if all dependencies are satisfied (this would require access to completed tasks)
                // For now, return tasks without dependencies
                if deps.is_empty() {
                    ready_tasks.push(task_id.clone());
                }
            }
        }
        
        ready_tasks
    }

    fn has_dependencies(&self, task_id: &str) -> bool {
        if let Some(deps) = self.edges.get(task_id) {
            !deps.is_empty()
        } else {
            false
        }
    }
}

impl ParallelBootManager {
    pub fn new(parallel_workers: usize) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            execution_graph: Arc::new(Mutex::new(ExecutionGraph::new())),
            active_tasks: Arc::new(Mutex::new(HashSet::new())),
            completed_tasks: Arc::new(Mutex::new(HashSet::new())),
            execution_results: Arc::new(Mutex::new(Vec::new())),
            is_running: Arc::new(AtomicBool::new(false)),
            parallel_workers: parallel_workers.max(1),
        }
    }

    pub fn add_task(&self, task: ParallelBootTask) {
        let mut tasks = self.tasks.lock().unwrap();
        tasks.insert(task.id.clone(), task.clone());
        
        let mut graph = self.execution_graph.lock().unwrap();
        graph.add_task(task);
    }

    pub fn start_parallel_execution(&self) -> Result<ParallelBootExecutor, String> {
        if self.is_running.load(Ordering::SeqCst) {
            return Err("Parallel execution already running".to_string());
        }

        self.is_running.store(true, Ordering::SeqCst);
        
        let executor = ParallelBootExecutor {
            manager: self.clone(),
            start_time: Instant::now(),
        };
        
        // Start the execution in a separate thread
        thread::spawn(move || {
            let _ = self.execute_parallel_tasks();
        });
        
        Ok(executor)
    }

    fn execute_parallel_tasks(&self) -> Result<(), String> {
        let graph = self.execution_graph.lock().unwrap();
        let ready_tasks = graph.get_ready_tasks();
        
        // Use thread pool for parallel execution
        let mut handles = Vec::new();
        let workers = self.parallel_workers;
        
        for chunk in ready_tasks.chunks(workers) {
            let mut chunk_handles = Vec::new();
            
            for task_id in chunk {
                if let Some(task) = self.tasks.lock().unwrap().get(task_id) {
                    if task.parallel_safe {
                        let manager = self.clone();
                        let handle = thread::spawn(move || {
                            manager.execute_task(task)
                        });
                        chunk_handles.push(handle);
                    }
                }
            }
            
            // Wait for chunk to complete before starting next
            for handle in chunk_handles {
                let _ = handle.join();
            }
        }
        
        Ok(())
    }

    fn execute_task(&self, task: &ParallelBootTask) -> TaskExecutionResult {
        let start_time = Instant::now();
        
        // Add to active tasks
        {
            let mut active = self.active_tasks.lock().unwrap();
            active.insert(task.id.clone());
        }
        
        // Simulate task execution
        let execution_duration = task.estimated_duration;
        thread::sleep(execution_duration);
        
        let end_time = Instant::now();
        let duration = end_time.duration_since(start_time);
        
        let result = TaskExecutionResult {
            task_id: task.id.clone(),
            start_time,
            end_time,
            duration,
            success: true,
            error_message: None,
        };
        
        // Store result and update completed tasks
        {
            let mut results = self.execution_results.lock().unwrap();
            results.push(result.clone());
            
            let mut completed = self.completed_tasks.lock().unwrap();
            completed.insert(task.id.clone());
            
            let mut active = self.active_tasks.lock().unwrap();
            active.remove(&task.id);
        }
        
        result
    }

    pub fn get_execution_status(&self) -> ParallelBootStatus {
        let active = self.active_tasks.lock().unwrap().len();
        let completed = self.completed_tasks.lock().unwrap().len();
        let total = self.tasks.lock().unwrap().len();
        
        let is_running = self.is_running.load(Ordering::SeqCst);
        
        ParallelBootStatus {
            is_running,
            active_tasks: active,
            completed_tasks: completed,
            total_tasks: total,
            progress_percentage: if total > 0 { (completed as f64 / total as f64) * 100.0 } else { 0.0 },
            estimated_time_remaining: self.estimate_remaining_time(),
        }
    }

    fn estimate_remaining_time(&self) -> Duration {
        let results = self.execution_results.lock().unwrap();
        let completed = self.completed_tasks.lock().unwrap();
        
        if results.is_empty() {
            return Duration::from_secs(0);
        }
        
        let avg_duration: Duration = results
            .iter()
            .map(|r| r.duration)
            .sum::<Duration>() / results.len() as u32;
        
        let remaining_tasks = self.tasks.lock().unwrap().len() - completed.len();
        avg_duration * remaining_tasks as u32
    }

    pub fn get_execution_results(&self) -> Vec<TaskExecutionResult> {
        self.execution_results.lock().unwrap().clone()
    }

    pub fn stop(&self) {
        self.is_running.store(false, Ordering::SeqCst);
    }
}

#[derive(Clone)]
pub struct ParallelBootExecutor {
    manager: ParallelBootManager,
    start_time: Instant,
}

impl ParallelBootExecutor {
    pub fn get_status(&self) -> ParallelBootStatus {
        self.manager.get_execution_status()
    }

    pub fn wait_for_completion(&self) -> Vec<TaskExecutionResult> {
        while self.manager.get_execution_status().is_running {
            thread::sleep(Duration::from_millis(100));
        }
        
        self.manager.get_execution_results()
    }
}

#[derive(Clone, Debug)]
pub struct ParallelBootStatus {
    pub is_running: bool,
    pub active_tasks: usize,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub progress_percentage: f64,
    pub estimated_time_remaining: Duration,
}

pub struct ParallelBootAnalyzer {
    execution_graph: ExecutionGraph,
    task_timings: BTreeMap<String, Vec<Duration>>,
}

impl ParallelBootAnalyzer {
    pub fn new() -> Self {
        Self {
            execution_graph: ExecutionGraph::new(),
            task_timings: BTreeMap::new(),
        }
    }

    pub fn analyze_critical_path(&self) -> CriticalPathAnalysis {
        // Simplified critical path analysis
        let mut critical_path = Vec::new();
        let mut total_critical_time = Duration::from_millis(0);
        
        // Find longest path through the dependency graph
        for (task_id, task) in &self.execution_graph.nodes {
            if !self.execution_graph.has_dependencies(task_id) {
                // This is a root task, trace its path
                let path = self.trace_task_path(task_id);
                let path_time: Duration = path.iter()
                    .filter_map(|id| self.execution_graph.nodes.get(id))
                    .map(|task| task.estimated_duration)
                    .sum();
                
                if path_time > total_critical_time {
                    total_critical_time = path_time;
                    critical_path = path;
                }
            }
        }
        
        CriticalPathAnalysis {
            critical_path,
            total_critical_time,
            parallelization_efficiency: self.calculate_parallelization_efficiency(),
        }
    }

    fn trace_task_path(&self, task_id: &str) -> Vec<String> {
        let mut path = vec![task_id.to_string()];
        
        // This is a simplified version - in practice, you'd want to handle cycles
        // and more complex dependency graphs
        if let Some(task) = self.execution_graph.nodes.get(task_id) {
            for dep in &task.dependencies {
                let mut dep_path = self.trace_task_path(dep);
                path.splice(0, 0, dep_path);
            }
        }
        
        path
    }

    fn calculate_parallelization_efficiency(&self) -> f64 {
        let total_serial_time: Duration = self.execution_graph.nodes
            .values()
            .filter(|task| !task.parallel_safe)
            .map(|task| task.estimated_duration)
            .sum();
        
        let total_parallel_time: Duration = self.execution_graph.nodes
            .values()
            .filter(|task| task.parallel_safe)
            .map(|task| task.estimated_duration)
            .sum();
        
        let serial_time_ms = total_serial_time.as_millis() as f64;
        let parallel_time_ms = total_parallel_time.as_millis() as f64;
        
        if serial_time_ms > 0.0 {
            serial_time_ms / (serial_time_ms + parallel_time_ms).max(1.0)
        } else {
            0.0
        }
    }

    pub fn add_timing_data(&mut self, task_id: String, timing: Duration) {
        self.task_timings
            .entry(task_id)
            .or_insert_with(Vec::new)
            .push(timing);
    }

    pub fn get_optimization_suggestions(&self) -> Vec<OptimizationSuggestion> {
        let mut suggestions = Vec::new();
        
        // Analyze task timings for optimization opportunities
        for (task_id, timings) in &self.task_timings {
            let avg_duration = timings.iter().sum::<Duration>() / timings.len() as u32;
            
            if avg_duration > Duration::from_millis(200) {
                suggestions.push(OptimizationSuggestion {
                    task_id: task_id.clone(),
                    suggestion: "Consider breaking this task into smaller parallel components".to_string(),
                    expected_improvement: Duration::from_millis(100),
                });
            }
        }
        
        // Add general suggestions based on critical path analysis
        let critical_path = self.analyze_critical_path();
        if critical_path.parallelization_efficiency < 0.5 {
            suggestions.push(OptimizationSuggestion {
                task_id: "critical_path".to_string(),
                suggestion: "Critical path has low parallelization efficiency. Consider identifying independent tasks".to_string(),
                expected_improvement: Duration::from_millis(300),
            });
        }
        
        suggestions
    }
}

#[derive(Clone, Debug)]
pub struct CriticalPathAnalysis {
    pub critical_path: Vec<String>,
    pub total_critical_time: Duration,
    pub parallelization_efficiency: f64,
}

#[derive(Clone, Debug)]
pub struct OptimizationSuggestion {
    pub task_id: String,
    pub suggestion: String,
    pub expected_improvement: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_boot_manager_creation() {
        let manager = ParallelBootManager::new(4);
        assert_eq!(manager.parallel_workers, 4);
    }

    #[test]
    fn test_task_addition() {
        let manager = ParallelBootManager::new(2);
        
        let task = ParallelBootTask {
            id: "test_task".to_string(),
            name: "Test Task".to_string(),
            dependencies: vec![],
            estimated_duration: Duration::from_millis(100),
            critical_path: false,
            parallel_safe: true,
            execution_context: TaskContext::KernelSpace,
        };
        
        manager.add_task(task);
        
        let status = manager.get_execution_status();
        assert_eq!(status.total_tasks, 1);
    }

    #[test]
    fn test_execution_graph() {
        let mut graph = ExecutionGraph::new();
        
        let task = ParallelBootTask {
            id: "task1".to_string(),
            name: "Task 1".to_string(),
            dependencies: vec![],
            estimated_duration: Duration::from_millis(100),
            critical_path: false,
            parallel_safe: true,
            execution_context: TaskContext::KernelSpace,
        };
        
        graph.add_task(task);
        
        let ready_tasks = graph.get_ready_tasks();
        assert_eq!(ready_tasks.len(), 1);
        assert_eq!(ready_tasks[0], "task1");
    }
}
