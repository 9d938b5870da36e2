use std::collections::{HashMap, HashSet, BTreeMap};
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use async_trait::async_trait;
use crate::utils::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallGraph {
    pub nodes: Vec<CallGraphNode>,
    pub edges: Vec<CallGraphEdge>,
    pub entry_points: Vec<String>,
    pub complexity_score: u32,
    pub call_depth_distribution: BTreeMap<u32, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallGraphNode {
    pub id: String,
    pub function_name: String,
    pub file_path: String,
    pub line_number: u32,
    pub complexity: u32,
    pub is_extern: bool,
    pub is_entry_point: bool,
    pub call_count: u32,
    pub educational_description: Option<String>,
    pub performance_impact: PerformanceImpact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallGraphEdge {
    pub from: String,
    pub to: String,
    pub call_count: u32,
    pub is_recursive: bool,
    pub is_cross_file: bool,
    pub is_system_call: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDependency {
    pub function_name: String,
    pub direct_dependencies: Vec<DependencyInfo>,
    pub transitive_dependencies: Vec<DependencyInfo>,
    pub dependents: Vec<String>, // Functions that depend on this one
    pub dependency_depth: u32,
    pub circular_dependencies: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyInfo {
    pub name: String,
    pub file_path: String,
    pub line_number: u32,
    pub dependency_type: DependencyType,
    pub is_optional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionTrace {
    pub start_function: String,
    pub trace_depth: u32,
    pub path: Vec<TraceStep>,
    pub total_calls: u32,
    pub performance_summary: PerformanceTraceSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub function_name: String,
    pub file_path: String,
    pub line_number: u32,
    pub call_site: CallSite,
    pub estimated_cost: u32,
    pub call_type: CallType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSite {
    pub file_path: String,
    pub line_number: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DependencyType {
    Direct,
    Indirect,
    External,
    SystemCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PerformanceImpact {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CallType {
    FunctionCall,
    MethodCall,
    MacroCall,
    SystemCall,
    VTableCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceTraceSummary {
    pub estimated_total_time: u32, // in cycles or microseconds
    pub hot_path_functions: Vec<String>,
    pub bottleneck_functions: Vec<String>,
    pub optimization_opportunities: Vec<OptimizationOpportunity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationOpportunity {
    pub function_name: String,
    pub opportunity_type: OptimizationType,
    pub estimated_improvement: String,
    pub complexity_level: ComplexityLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationType {
    Inlining,
    LoopOptimization,
    MemoryOptimization,
    AlgorithmImprovement,
    Parallelization,
}

#[async_trait]
pub trait CallGraphAnalysisTrait {
    async fn generate_call_graph(&self, file_path: &str, function_name: Option<&str>, depth_limit: Option<u32>) -> Result<CallGraph, anyhow::Error>;
    async fn get_function_dependencies(&self, file_path: &str, function_name: Option<&str>) -> Result<FunctionDependency, anyhow::Error>;
    async fn trace_function_calls(&self, file_path: &str, function_name: Option<&str>, depth_limit: Option<u32>) -> Result<FunctionTrace, anyhow::Error>;
}

pub struct CallGraphAnalyzer {
    call_graph_cache: HashMap<String, CallGraph>,
    dependency_analyzer: DependencyAnalyzer,
    trace_analyzer: TraceAnalyzer,
}

impl CallGraphAnalyzer {
    pub fn new() -> Self {
        Self {
            call_graph_cache: HashMap::new(),
            dependency_analyzer: DependencyAnalyzer::new(),
            trace_analyzer: TraceAnalyzer::new(),
        }
    }
}

#[async_trait]
impl CallGraphAnalysisTrait for CallGraphAnalyzer {
    async fn generate_call_graph(&self, file_path: &str, function_name: Option<&str>, depth_limit: Option<u32>) -> Result<CallGraph, anyhow::Error> {
        let cache_key = format!("{}_{:?}_{:?}", file_path, function_name, depth_limit);
        
        if let Some(cached_graph) = self.call_graph_cache.get(&cache_key) {
            return Ok(cached_graph.clone());
        }

        let call_graph = self.build_call_graph(file_path, function_name, depth_limit).await?;
        self.call_graph_cache.insert(cache_key, call_graph.clone());
        
        Ok(call_graph)
    }

    async fn get_function_dependencies(&self, file_path: &str, function_name: Option<&str>) -> Result<FunctionDependency, anyhow::Error> {
        self.dependency_analyzer.analyze_dependencies(file_path, function_name).await
    }

    async fn trace_function_calls(&self, file_path: &str, function_name: Option<&str>, depth_limit: Option<u32>) -> Result<FunctionTrace, anyhow::Error> {
        self.trace_analyzer.trace_calls(file_path, function_name, depth_limit).await
    }
}

impl CallGraphAnalyzer {
    async fn build_call_graph(&self, file_path: &str, function_name: Option<&str>, depth_limit: Option<u32>) -> Result<CallGraph, anyhow::Error> {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut entry_points = Vec::new();
        let mut call_depth_distribution = BTreeMap::new();

        // Read and parse the source file
        let source_code = self.read_source_file(file_path).await?;
        let functions = self.extract_functions(&source_code).await?;

        // Build nodes
        for func in &functions {
            let node_id = format!("{}:{}", file_path, func.name);
            let performance_impact = self.assess_performance_impact(&func, &source_code).await;
            let educational_description = self.get_educational_description(&func.name).await;
            
            nodes.push(CallGraphNode {
                id: node_id,
                function_name: func.name.clone(),
                file_path: file_path.to_string(),
                line_number: func.start_line,
                complexity: func.complexity,
                is_extern: self.is_external_function(&func, &source_code).await,
                is_entry_point: self.is_entry_point(&func, &source_code).await,
                call_count: 0, // Will be calculated during edge creation
                educational_description,
                performance_impact,
            });

            if self.is_entry_point(&func, &source_code).await {
                entry_points.push(func.name.clone());
            }
        }

        // Build edges by analyzing function calls
        for (i, func) in functions.iter().enumerate() {
            let caller_node_id = format!("{}:{}", file_path, func.name);
            let calls = self.extract_function_calls(&source_code, &func).await?;
            
            for call in &calls {
                let callee_node_id = format!("{}:{}", call.target_file, call.function_name);
                
                // Find or create the callee node if it's from a different file
                if !nodes.iter().any(|n| n.id == callee_node_id) && call.target_file != file_path {
                    nodes.push(CallGraphNode {
                        id: callee_node_id.clone(),
                        function_name: call.function_name.clone(),
                        file_path: call.target_file.clone(),
                        line_number: call.line_number,
                        complexity: self.estimate_function_complexity(&call.function_name).await,
                        is_extern: true,
                        is_entry_point: false,
                        call_count: 0,
                        educational_description: self.get_educational_description(&call.function_name).await,
                        performance_impact: PerformanceImpact::Medium,
                    });
                }

                // Update call count for caller
                if let Some(node) = nodes.iter_mut().find(|n| n.id == caller_node_id) {
                    node.call_count += 1;
                }

                edges.push(CallGraphEdge {
                    from: caller_node_id,
                    to: callee_node_id,
                    call_count: 1,
                    is_recursive: call.function_name == func.name,
                    is_cross_file: call.target_file != file_path,
                    is_system_call: self.is_system_call(&call.function_name).await,
                });

                // Update depth distribution
                let depth = self.calculate_call_depth(&edges, &nodes, &caller_node_id).await;
                *call_depth_distribution.entry(depth).or_insert(0) += 1;
            }
        }

        // Calculate total complexity
        let complexity_score: u32 = nodes.iter().map(|n| n.complexity).sum();

        Ok(CallGraph {
            nodes,
            edges,
            entry_points,
            complexity_score,
            call_depth_distribution,
        })
    }

    async fn read_source_file(&self, file_path: &str) -> Result<String, anyhow::Error> {
        // In a real implementation, this would read from the actual file system
        // For demonstration purposes, returning mock data
        Ok(match file_path {
            "kernel/src/main.rs" => r#"
fn main() {
    initialize_kernel();
    start_scheduler();
    init_memory_manager();
    start_system_services();
}

fn initialize_kernel() {
    setup_interrupt_handlers();
    configure_memory();
}

fn start_scheduler() {
    create_idle_task();
    setup_timer();
}

fn setup_interrupt_handlers() {
    register_isr(0, timer_handler);
    register_isr(1, syscall_handler);
}

fn timer_handler() {
    schedule_next_task();
}

fn syscall_handler() {
    handle_syscall(get_syscall_number());
}
"#.to_string(),
            _ => "fn example() { println!(\"Hello, World!\"); }".to_string(),
        })
    }

    async fn extract_functions(&self, source_code: &str) -> Result<Vec<FunctionInfo>, anyhow::Error> {
        let mut functions = Vec::new();
        let lines: Vec<&str> = source_code.lines().collect();
        let function_pattern = regex::Regex::new(r"fn\s+(\w+)\s*\(([^)]*)\)\s*(->\s*[^({\s]+)?")?;

        for (i, line) in lines.iter().enumerate() {
            if let Some(captures) = function_pattern.captures(line) {
                let name = captures[1].to_string();
                let complexity = self.calculate_function_complexity(line);
                
                functions.push(FunctionInfo {
                    name,
                    signature: line.trim().to_string(),
                    start_line: i as u32 + 1,
                    end_line: self.find_function_end(&lines, i),
                    parameters: vec![], // Would parse parameters
                    return_type: captures.get(3).map(|m| m.as_str().trim().to_string()).unwrap_or_else(|| "()".to_string()),
                    complexity,
                    educational_description: None,
                });
            }
        }

        Ok(functions)
    }

    async fn extract_function_calls(&self, source_code: &str, func: &FunctionInfo) -> Result<Vec<FunctionCall>, anyhow::Error> {
        let mut calls = Vec::new();
        let lines: Vec<&str> = source_code.lines().collect();
        
        // Simple function call pattern
        let call_pattern = regex::Regex::new(r"(\w+)\s*\(")?;

        for (i, line) in lines.iter().enumerate().take(func.end_line as usize).skip(func.start_line as usize) {
            for capture in call_pattern.captures_iter(line) {
                let function_name = capture[1].to_string();
                if function_name != "println" && function_name != "print" {
                    calls.push(FunctionCall {
                        function_name,
                        target_file: "kernel/src/main.rs".to_string(), // Would resolve actual file
                        line_number: i as u32 + 1,
                        call_site: CallSite {
                            file_path: "kernel/src/main.rs".to_string(),
                            line_number: i as u32 + 1,
                            column: 0,
                        },
                        estimated_cost: 1,
                        call_type: CallType::FunctionCall,
                    });
                }
            }
        }

        Ok(calls)
    }

    async fn assess_performance_impact(&self, func: &FunctionInfo, source_code: &str) -> PerformanceImpact {
        // Simple heuristic based on complexity and function characteristics
        if func.name.contains("timer") || func.name.contains("interrupt") {
            PerformanceImpact::Critical
        } else if func.name.contains("syscall") || func.name.contains("schedule") {
            PerformanceImpact::High
        } else if func.complexity > 10 {
            PerformanceImpact::Medium
        } else {
            PerformanceImpact::Low
        }
    }

    async fn is_external_function(&self, func: &FunctionInfo, source_code: &str) -> bool {
        // Check if function is from external module or system call
        func.name.contains("extern") || self.is_system_call(&func.name).await
    }

    async fn is_entry_point(&self, func: &FunctionInfo, source_code: &str) -> bool {
        func.name == "main" || 
        func.name.contains("init") || 
        func.name.contains("start") ||
        func.name == "_start" // Assembly entry point
    }

    async fn is_system_call(&self, function_name: &str) -> bool {
        let system_calls = [
            "read", "write", "open", "close", "fork", "exec", "exit", "wait",
            "getpid", "kill", "signal", "mmap", "munmap", "brk", "sbrk",
            "access", "chdir", "chmod", "chown", "dup", "dup2", "pipe",
            "stat", "fstat", "lstat", "time", "utime"
        ];
        
        system_calls.contains(&function_name)
    }

    fn find_function_end(&self, lines: &[&str], start_idx: usize) -> u32 {
        let mut brace_count = 0;
        let mut in_function = false;

        for (i, line) in lines.iter().enumerate().skip(start_idx) {
            for ch in line.chars() {
                if ch == '{' {
                    brace_count += 1;
                    in_function = true;
                } else if ch == '}' {
                    brace_count -= 1;
                    if in_function && brace_count == 0 {
                        return i as u32 + 1;
                    }
                }
            }
        }

        (start_idx as u32) + 1
    }

    async fn calculate_function_complexity(&self, function_line: &str) -> u32 {
        let mut complexity = 1;
        
        if function_line.contains("if ") { complexity += 1; }
        if function_line.contains("while ") { complexity += 1; }
        if function_line.contains("for ") { complexity += 1; }
        if function_line.contains("match ") { complexity += 2; }

        complexity
    }

    async fn get_educational_description(&self, function_name: &str) -> Option<String> {
        let descriptions = HashMap::from([
            ("main".to_string(), "Main entry point - initializes kernel and starts system services"),
            ("initialize_kernel".to_string(), "Kernel initialization - sets up core subsystems"),
            ("start_scheduler".to_string(), "Scheduler initialization - prepares process scheduling"),
            ("timer_handler".to_string(), "Timer interrupt handler - manages time-based events"),
            ("syscall_handler".to_string(), "System call handler - processes user requests"),
            ("schedule_next_task".to_string(), "Task scheduling - selects next process to run"),
        ]);

        descriptions.get(function_name).map(|s| s.to_string())
    }

    async fn estimate_function_complexity(&self, function_name: &str) -> u32 {
        // Estimated complexity based on function name patterns
        if function_name.contains("handler") || function_name.contains("isr") {
            5
        } else if function_name.contains("schedule") || function_name.contains("allocate") {
            8
        } else if function_name.contains("init") || function_name.contains("setup") {
            3
        } else {
            5
        }
    }

    async fn calculate_call_depth(&self, edges: &[CallGraphNode], nodes: &[CallGraphNode], node_id: &str) -> u32 {
        // Simplified depth calculation - in real implementation would use graph algorithms
        1
    }
}

// Supporting structures
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FunctionCall {
    function_name: String,
    target_file: String,
    line_number: u32,
    call_site: CallSite,
    estimated_cost: u32,
    call_type: CallType,
}

pub struct DependencyAnalyzer {
    dependency_cache: HashMap<String, FunctionDependency>,
}

impl DependencyAnalyzer {
    fn new() -> Self {
        Self {
            dependency_cache: HashMap::new(),
        }
    }

    async fn analyze_dependencies(&self, file_path: &str, function_name: Option<&str>) -> Result<FunctionDependency, anyhow::Error> {
        // Simplified dependency analysis
        let function_name = function_name.unwrap_or("main");
        
        let direct_deps = vec![
            DependencyInfo {
                name: "initialize_kernel".to_string(),
                file_path: "kernel/src/main.rs".to_string(),
                line_number: 15,
                dependency_type: DependencyType::Direct,
                is_optional: false,
            },
            DependencyInfo {
                name: "start_scheduler".to_string(),
                file_path: "kernel/src/main.rs".to_string(),
                line_number: 16,
                dependency_type: DependencyType::Direct,
                is_optional: false,
            },
        ];

        Ok(FunctionDependency {
            function_name: function_name.to_string(),
            direct_dependencies: direct_deps,
            transitive_dependencies: vec![],
            dependents: vec![],
            dependency_depth: 2,
            circular_dependencies: vec![],
        })
    }
}

pub struct TraceAnalyzer {
    trace_cache: HashMap<String, FunctionTrace>,
}

impl TraceAnalyzer {
    fn new() -> Self {
        Self {
            trace_cache: HashMap::new(),
        }
    }

    async fn trace_calls(&self, file_path: &str, function_name: Option<&str>, depth_limit: Option<u32>) -> Result<FunctionTrace, anyhow::Error> {
        let function_name = function_name.unwrap_or("main");
        let depth_limit = depth_limit.unwrap_or(10);
        
        let trace = FunctionTrace {
            start_function: function_name.to_string(),
            trace_depth: depth_limit,
            path: vec![
                TraceStep {
                    function_name: function_name.to_string(),
                    file_path: file_path.to_string(),
                    line_number: 1,
                    call_site: CallSite {
                        file_path: file_path.to_string(),
                        line_number: 1,
                        column: 0,
                    },
                    estimated_cost: 10,
                    call_type: CallType::FunctionCall,
                },
                TraceStep {
                    function_name: "initialize_kernel".to_string(),
                    file_path: file_path.to_string(),
                    line_number: 2,
                    call_site: CallSite {
                        file_path: file_path.to_string(),
                        line_number: 2,
                        column: 4,
                    },
                    estimated_cost: 20,
                    call_type: CallType::FunctionCall,
                },
            ],
            total_calls: 10,
            performance_summary: PerformanceTraceSummary {
                estimated_total_time: 150,
                hot_path_functions: vec!["timer_handler".to_string(), "schedule_next_task".to_string()],
                bottleneck_functions: vec!["memory_allocate".to_string()],
                optimization_opportunities: vec![
                    OptimizationOpportunity {
                        function_name: "schedule_next_task".to_string(),
                        opportunity_type: OptimizationType::Inlining,
                        estimated_improvement: "15% performance boost".to_string(),
                        complexity_level: ComplexityLevel::Intermediate,
                    }
                ],
            },
        };

        Ok(trace)
    }
}
