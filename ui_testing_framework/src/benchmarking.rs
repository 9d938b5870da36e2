//! UI Performance Benchmarking Module
//!
//! Provides comprehensive performance testing and benchmarking for MultiOS
//! UI components including render performance, interaction latency,
//! animation smoothness, and memory usage analysis.

use super::{FrameworkResult, FrameworkError, UIFrameworkConfig, PerformanceThresholds};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use std::time::{Duration, Instant};
use log::info;
use std::sync::Arc;
use parking_lot::RwLock;

/// Performance benchmark results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub overall_score: f64,
    pub benchmarks: HashMap<String, ComponentBenchmark>,
    pub render_performance: Vec<RenderPerformanceResult>,
    pub interaction_performance: Vec<InteractionPerformanceResult>,
    pub animation_performance: Vec<AnimationPerformanceResult>,
    pub memory_performance: Vec<MemoryPerformanceResult>,
    pub network_performance: Vec<NetworkPerformanceResult>,
    pub lighthouse_scores: LighthouseScores,
    pub issues: Vec<PerformanceIssue>,
    pub recommendations: Vec<PerformanceRecommendation>,
    pub timestamp: DateTime<Utc>,
}

/// Component-specific benchmark results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentBenchmark {
    pub component_name: String,
    pub component_type: ComponentType,
    pub load_time_ms: u64,
    pub render_time_ms: u64,
    pub interaction_time_ms: u64,
    pub memory_usage_mb: u64,
    pub cpu_usage_percent: f64,
    pub gpu_usage_percent: f64,
    pub frame_rate_fps: f32,
    pub accessibility_score: f64,
    pub best_practices_score: f64,
    pub seo_score: f64,
    pub passed: bool,
    pub issues: Vec<String>,
}

/// Component types for benchmarking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ComponentType {
    Button,
    TextField,
    List,
    Table,
    Modal,
    Navigation,
    Form,
    Chart,
    Image,
    Video,
    Custom(String),
}

/// Render performance testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPerformanceResult {
    pub component_name: String,
    pub render_start_time_ms: u64,
    pub render_end_time_ms: u64,
    pub total_render_time_ms: u64,
    pub paint_time_ms: u64,
    pub layout_time_ms: u64,
    pub composite_time_ms: u64,
    pub elements_rendered: u32,
    pub dom_nodes: u32,
    pub css_rules: u32,
    pub fps_during_render: f32,
    pub memory_delta_mb: i64,
    pub passed: bool,
}

/// Interaction performance testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionPerformanceResult {
    pub component_name: String,
    pub interaction_type: InteractionType,
    pub response_time_ms: u64,
    pub latency_ms: u64,
    pub throughput_ops_per_sec: f64,
    pub error_rate_percent: f64,
    pub user_experience_score: f64,
    pub input_delay_ms: u64,
    pub processing_delay_ms: u64,
    pub output_delay_ms: u64,
    pub passed: bool,
}

/// Interaction types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InteractionType {
    Click,
    DoubleClick,
    Drag,
    Scroll,
    Type,
    Swipe,
    Pinch,
    Hover,
    Focus,
    Keyboard,
    Gesture,
}

/// Animation performance testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationPerformanceResult {
    pub animation_name: String,
    pub animation_type: AnimationType,
    pub duration_ms: u64,
    pub frame_rate_fps: f32,
    pub smoothness_score: f64,
    pub dropped_frames: u32,
    pub total_frames: u32,
    pub gpu_usage_percent: f64,
    pub battery_impact_score: f64,
    pub accessibility_impact: String,
    pub paused_when_not_visible: bool,
    pub respects_reduced_motion: bool,
    pub passed: bool,
}

/// Animation types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationType {
    Fade,
    Slide,
    Scale,
    Rotate,
    Bounce,
    Custom(String),
}

/// Memory performance testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryPerformanceResult {
    pub component_name: String,
    pub initial_memory_mb: u64,
    pub peak_memory_mb: u64,
    pub final_memory_mb: u64,
    pub memory_leak_detected: bool,
    pub heap_usage_mb: u64,
    pub stack_usage_mb: u64,
    pub gc_pressure_score: f64,
    pub cache_efficiency: f64,
    pub allocation_rate_mb_per_sec: f64,
    pub deallocation_rate_mb_per_sec: f64,
    pub passed: bool,
}

/// Network performance testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkPerformanceResult {
    pub resource_name: String,
    pub resource_type: ResourceType,
    pub request_size_kb: f64,
    pub response_size_kb: f64,
    pub load_time_ms: u64,
    pub first_byte_time_ms: u64,
    pub download_time_ms: u64,
    pub cached: bool,
    pub compression_ratio: f64,
    pub caching_score: f64,
    pub passed: bool,
}

/// Resource types for network testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResourceType {
    JavaScript,
    CSS,
    Image,
    Font,
    HTML,
    Audio,
    Video,
    Data,
}

/// Lighthouse scores for web performance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LighthouseScores {
    pub performance: f64,
    pub accessibility: f64,
    pub best_practices: f64,
    pub seo: f64,
    pub pwa: f64,
    pub first_contentful_paint_ms: u64,
    pub largest_contentful_paint_ms: u64,
    pub first_input_delay_ms: u64,
    pub cumulative_layout_shift: f64,
    pub speed_index_ms: u64,
    pub time_to_interactive_ms: u64,
    pub total_blocking_time_ms: u64,
}

/// Performance issue identified during testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceIssue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: IssueSeverity,
    pub component: String,
    pub metric: String,
    pub current_value: String,
    pub threshold_value: String,
    pub impact: String,
    pub remediation: String,
}

/// Issue severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum IssueSeverity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

/// Performance recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact_estimate: ImpactEstimate,
    pub implementation_effort: ImplementationEffort,
    pub expected_improvement: String,
    pub related_issues: Vec<String>,
    pub implementation_steps: Vec<String>,
}

/// Impact estimates for improvements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImpactEstimate {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Implementation effort levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImplementationEffort {
    Minimal,
    Low,
    Medium,
    High,
    Significant,
}

/// Performance benchmark statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub percentiles: HashMap<String, f64>,
}

/// Performance profiler for detailed analysis
#[derive(Debug, Clone)]
pub struct PerformanceProfiler {
    start_time: Instant,
    measurements: Arc<RwLock<Vec<PerformanceMeasurement>>>,
    component_name: String,
}

#[derive(Debug, Clone)]
pub struct PerformanceMeasurement {
    pub timestamp: Duration,
    pub metric_type: MetricType,
    pub value: f64,
    pub unit: String,
    pub component: String,
}

#[derive(Debug, Clone)]
pub enum MetricType {
    RenderTime,
    InteractionTime,
    MemoryUsage,
    CpuUsage,
    GpuUsage,
    FrameRate,
    NetworkLatency,
    NetworkThroughput,
    AnimationDuration,
    GcTime,
    InputDelay,
}

/// Performance benchmark engine
pub struct PerformanceBenchmark {
    config: UIFrameworkConfig,
    thresholds: PerformanceThresholds,
    profiler: Option<PerformanceProfiler>,
}

impl PerformanceBenchmark {
    /// Create a new performance benchmark engine
    pub fn new(config: &UIFrameworkConfig) -> Self {
        Self {
            config: config.clone(),
            thresholds: config.performance_thresholds.clone(),
            profiler: None,
        }
    }

    /// Start performance profiling
    pub fn start_profiling(&mut self, component_name: String) {
        self.profiler = Some(PerformanceProfiler {
            start_time: Instant::now(),
            measurements: Arc::new(RwLock::new(Vec::new())),
            component_name,
        });
    }

    /// Record a performance measurement
    pub fn record_measurement(&mut self, metric_type: MetricType, value: f64, unit: String) {
        if let Some(profiler) = &mut self.profiler {
            let measurement = PerformanceMeasurement {
                timestamp: profiler.start_time.elapsed(),
                metric_type,
                value,
                unit,
                component: profiler.component_name.clone(),
            };

            profiler.measurements.write().push(measurement);
        }
    }

    /// Stop profiling and get results
    pub fn stop_profiling(&mut self) -> Option<Vec<PerformanceMeasurement>> {
        if let Some(profiler) = self.profiler.take() {
            let measurements = profiler.measurements.read().clone();
            Some(measurements)
        } else {
            None
        }
    }

    /// Run all performance benchmarks
    pub async fn run_all_benchmarks(&mut self) -> FrameworkResult<BenchmarkReport> {
        info!("Running comprehensive performance benchmarks...");
        
        let mut report = BenchmarkReport {
            overall_score: 0.0,
            benchmarks: HashMap::new(),
            render_performance: Vec::new(),
            interaction_performance: Vec::new(),
            animation_performance: Vec::new(),
            memory_performance: Vec::new(),
            network_performance: Vec::new(),
            lighthouse_scores: LighthouseScores::default(),
            issues: Vec::new(),
            recommendations: Vec::new(),
            timestamp: Utc::now(),
        };

        // Run component benchmarks
        report.benchmarks = self.benchmark_components().await?;

        // Run render performance tests
        report.render_performance = self.test_render_performance().await?;

        // Run interaction performance tests
        report.interaction_performance = self.test_interaction_performance().await?;

        // Run animation performance tests
        report.animation_performance = self.test_animation_performance().await?;

        // Run memory performance tests
        report.memory_performance = self.test_memory_performance().await?;

        // Run network performance tests
        report.network_performance = self.test_network_performance().await?;

        // Calculate Lighthouse scores
        report.lighthouse_scores = self.calculate_lighthouse_scores(&report).await?;

        // Calculate overall score
        report.overall_score = self.calculate_overall_score(&report);

        // Collect issues and recommendations
        self.collect_performance_issues(&report, &mut report.issues, &mut report.recommendations)?;

        Ok(report)
    }

    /// Benchmark individual components
    async fn benchmark_components(&mut self) -> FrameworkResult<HashMap<String, ComponentBenchmark>> {
        let mut benchmarks = HashMap::new();

        // Define components to benchmark
        let components = vec![
            ("button-component", ComponentType::Button),
            ("text-field-component", ComponentType::TextField),
            ("list-component", ComponentType::List),
            ("table-component", ComponentType::Table),
            ("modal-component", ComponentType::Modal),
            ("navigation-component", ComponentType::Navigation),
        ];

        for (name, component_type) in components {
            let benchmark = self.benchmark_component(name, component_type).await?;
            benchmarks.insert(name.to_string(), benchmark);
        }

        Ok(benchmarks)
    }

    /// Benchmark a specific component
    async fn benchmark_component(&mut self, name: &str, component_type: ComponentType) -> FrameworkResult<ComponentBenchmark> {
        self.start_profiling(name.to_string());

        // Simulate component loading
        let load_start = Instant::now();
        self.simulate_component_load(name, &component_type).await?;
        let load_time = load_start.elapsed().as_millis() as u64;

        self.record_measurement(MetricType::RenderTime, load_time as f64, "ms".to_string());

        // Simulate render performance test
        let render_start = Instant::now();
        self.simulate_component_render(name, &component_type).await?;
        let render_time = render_start.elapsed().as_millis() as u64;

        self.record_measurement(MetricType::RenderTime, render_time as f64, "ms".to_string());

        // Simulate interaction test
        let interaction_start = Instant::now();
        self.simulate_component_interaction(name, &component_type).await?;
        let interaction_time = interaction_start.elapsed().as_millis() as u64;

        self.record_measurement(MetricType::InteractionTime, interaction_time as f64, "ms".to_string());

        // Simulate memory measurement
        let memory_usage = self.simulate_memory_usage(name, &component_type).await;

        let measurements = self.stop_profiling().unwrap_or_default();

        // Calculate metrics from measurements
        let avg_render_time = self.calculate_average_metric(&measurements, MetricType::RenderTime);
        let avg_interaction_time = self.calculate_average_metric(&measurements, MetricType::InteractionTime);

        Ok(ComponentBenchmark {
            component_name: name.to_string(),
            component_type,
            load_time_ms: load_time,
            render_time_ms: render_time,
            interaction_time_ms: interaction_time,
            memory_usage_mb: memory_usage,
            cpu_usage_percent: 45.0, // Simulated
            gpu_usage_percent: 25.0, // Simulated
            frame_rate_fps: 60.0, // Simulated
            accessibility_score: 95.0, // Simulated
            best_practices_score: 88.0, // Simulated
            seo_score: 90.0, // Simulated
            passed: render_time <= self.thresholds.max_load_time_ms,
            issues: if render_time > self.thresholds.max_load_time_ms {
                vec!["Render time exceeds threshold".to_string()]
            } else {
                vec![]
            },
        })
    }

    /// Test render performance
    async fn test_render_performance(&mut self) -> FrameworkResult<Vec<RenderPerformanceResult>> {
        let mut results = Vec::new();

        let components = vec![
            "button",
            "textfield", 
            "list",
            "table",
            "modal",
            "navigation",
        ];

        for component in components {
            let result = self.measure_render_performance(component).await?;
            results.push(result);
        }

        Ok(results)
    }

    /// Measure render performance for a component
    async fn measure_render_performance(&mut self, component: &str) -> FrameworkResult<RenderPerformanceResult> {
        let render_start = Instant::now();
        
        // Simulate render operation
        self.simulate_render(component).await?;
        
        let render_end = Instant::now();
        let total_render_time = render_end.duration_since(render_start).as_millis();

        Ok(RenderPerformanceResult {
            component_name: component.to_string(),
            render_start_time_ms: 0,
            render_end_time_ms: total_render_time,
            total_render_time_ms: total_render_time,
            paint_time_ms: total_render_time / 3,
            layout_time_ms: total_render_time / 3,
            composite_time_ms: total_render_time / 3,
            elements_rendered: 100, // Simulated
            dom_nodes: 50, // Simulated
            css_rules: 25, // Simulated
            fps_during_render: 60.0, // Simulated
            memory_delta_mb: 2, // Simulated
            passed: total_render_time <= 16, // 60 FPS threshold
        })
    }

    /// Test interaction performance
    async fn test_interaction_performance(&mut self) -> FrameworkResult<Vec<InteractionPerformanceResult>> {
        let mut results = Vec::new();

        let interactions = vec![
            ("button", InteractionType::Click),
            ("textfield", InteractionType::Type),
            ("list", InteractionType::Scroll),
            ("slider", InteractionType::Drag),
            ("menu", InteractionType::Hover),
        ];

        for (component, interaction_type) in interactions {
            let result = self.measure_interaction_performance(component, interaction_type).await?;
            results.push(result);
        }

        Ok(results)
    }

    /// Measure interaction performance
    async fn measure_interaction_performance(&mut self, component: &str, interaction_type: InteractionType) -> FrameworkResult<InteractionPerformanceResult> {
        let start_time = Instant::now();
        
        // Simulate interaction
        self.simulate_interaction(component, &interaction_type).await?;
        
        let response_time = start_time.elapsed().as_millis();

        Ok(InteractionPerformanceResult {
            component_name: component.to_string(),
            interaction_type,
            response_time_ms: response_time,
            latency_ms: response_time / 2,
            throughput_ops_per_sec: 1000.0 / response_time as f64,
            error_rate_percent: 0.5, // Simulated
            user_experience_score: 85.0, // Simulated
            input_delay_ms: response_time / 4,
            processing_delay_ms: response_time / 2,
            output_delay_ms: response_time / 4,
            passed: response_time <= self.thresholds.max_interaction_response_ms,
        })
    }

    /// Test animation performance
    async fn test_animation_performance(&mut self) -> FrameworkResult<Vec<AnimationPerformanceResult>> {
        let mut results = Vec::new();

        let animations = vec![
            ("fade-in", AnimationType::Fade),
            ("slide-in", AnimationType::Slide),
            ("scale-up", AnimationType::Scale),
            ("bounce-effect", AnimationType::Bounce),
        ];

        for (animation_name, animation_type) in animations {
            let result = self.measure_animation_performance(animation_name, animation_type).await?;
            results.push(result);
        }

        Ok(results)
    }

    /// Measure animation performance
    async fn measure_animation_performance(&mut self, animation_name: &str, animation_type: AnimationType) -> FrameworkResult<AnimationPerformanceResult> {
        let duration_ms = match animation_type {
            AnimationType::Fade => 300,
            AnimationType::Slide => 500,
            AnimationType::Scale => 200,
            AnimationType::Bounce => 1000,
            AnimationType::Rotate => 800,
            AnimationType::Custom(_) => 400,
        };

        // Simulate animation
        self.simulate_animation(animation_name, &animation_type).await?;

        let fps = if duration_ms > 0 {
            1000.0 / duration_ms as f64 * 60.0
        } else {
            60.0
        };

        Ok(AnimationPerformanceResult {
            animation_name: animation_name.to_string(),
            animation_type,
            duration_ms,
            frame_rate_fps: fps as f32,
            smoothness_score: if fps >= 55.0 { 95.0 } else { 60.0 },
            dropped_frames: if fps < 55.0 { (60.0 - fps) as u32 } else { 0 },
            total_frames: 60,
            gpu_usage_percent: 35.0, // Simulated
            battery_impact_score: 75.0, // Simulated
            accessibility_impact: "Respects prefers-reduced-motion".to_string(),
            paused_when_not_visible: true,
            respects_reduced_motion: true,
            passed: fps >= self.thresholds.min_fps as f32,
        })
    }

    /// Test memory performance
    async fn test_memory_performance(&mut self) -> FrameworkResult<Vec<MemoryPerformanceResult>> {
        let mut results = Vec::new();

        let components = vec![
            "list-large",
            "table-large",
            "chart-complex",
            "image-gallery",
            "video-player",
        ];

        for component in components {
            let result = self.measure_memory_performance(component).await?;
            results.push(result);
        }

        Ok(results)
    }

    /// Measure memory performance
    async fn measure_memory_performance(&mut self, component: &str) -> FrameworkResult<MemoryPerformanceResult> {
        let initial_memory = self.get_current_memory_usage().await;

        // Simulate component usage
        self.simulate_memory_usage_cycle(component).await?;

        let peak_memory = self.get_current_memory_usage().await;
        let final_memory = self.get_current_memory_usage().await;

        let memory_leak = final_memory > initial_memory + 10; // 10MB threshold

        Ok(MemoryPerformanceResult {
            component_name: component.to_string(),
            initial_memory_mb: initial_memory,
            peak_memory_mb: peak_memory,
            final_memory_mb: final_memory,
            memory_leak_detected: memory_leak,
            heap_usage_mb: peak_memory * 0.8,
            stack_usage_mb: peak_memory * 0.1,
            gc_pressure_score: if memory_leak { 30.0 } else { 90.0 },
            cache_efficiency: 85.0, // Simulated
            allocation_rate_mb_per_sec: 5.0, // Simulated
            deallocation_rate_mb_per_sec: if memory_leak { 3.0 } else { 5.5 },
            passed: !memory_leak && peak_memory <= self.thresholds.max_memory_usage_mb,
        })
    }

    /// Test network performance
    async fn test_network_performance(&mut self) -> FrameworkResult<Vec<NetworkPerformanceResult>> {
        let mut results = Vec::new();

        let resources = vec![
            ("main.js", ResourceType::JavaScript),
            ("styles.css", ResourceType::CSS),
            ("logo.png", ResourceType::Image),
            ("font.woff2", ResourceType::Font),
        ];

        for (resource_name, resource_type) in resources {
            let result = self.measure_network_performance(resource_name, resource_type).await?;
            results.push(result);
        }

        Ok(results)
    }

    /// Measure network performance
    async fn measure_network_performance(&mut self, resource_name: &str, resource_type: ResourceType) -> FrameworkResult<NetworkPerformanceResult> {
        // Simulate network request
        let load_start = Instant::now();
        self.simulate_network_request(resource_name, &resource_type).await?;
        let load_time = load_start.elapsed().as_millis();

        let (request_size, response_size) = match resource_type {
            ResourceType::JavaScript => (120.5, 95.2),
            ResourceType::CSS => (25.3, 18.7),
            ResourceType::Image => (150.0, 120.0),
            ResourceType::Font => (85.0, 75.0),
            ResourceType::HTML => (45.0, 45.0),
            ResourceType::Audio => (2048.0, 2048.0),
            ResourceType::Video => (10240.0, 10240.0),
            ResourceType::Data => (512.0, 512.0),
        };

        let compression_ratio = if request_size > 0 {
            1.0 - (response_size / request_size)
        } else {
            0.0
        };

        Ok(NetworkPerformanceResult {
            resource_name: resource_name.to_string(),
            resource_type,
            request_size_kb: request_size,
            response_size_kb: response_size,
            load_time_ms: load_time,
            first_byte_time_ms: load_time / 3,
            download_time_ms: (load_time * 2) / 3,
            cached: resource_name.contains(".css"),
            compression_ratio,
            caching_score: if resource_name.contains(".css") { 90.0 } else { 60.0 },
            passed: load_time <= 1000, // 1 second threshold
        })
    }

    // Simulated operations for benchmarking

    async fn simulate_component_load(&self, component: &str, component_type: &ComponentType) -> FrameworkResult<()> {
        let delay = match component_type {
            ComponentType::Button => 10,
            ComponentType::TextField => 15,
            ComponentType::List => 50,
            ComponentType::Table => 100,
            ComponentType::Modal => 80,
            ComponentType::Navigation => 30,
            ComponentType::Chart => 200,
            ComponentType::Image => 25,
            ComponentType::Video => 500,
            ComponentType::Form => 60,
            ComponentType::Custom(_) => 100,
        };
        
        tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
        Ok(())
    }

    async fn simulate_component_render(&self, component: &str, component_type: &ComponentType) -> FrameworkResult<()> {
        let delay = match component_type {
            ComponentType::Button => 8,
            ComponentType::TextField => 12,
            ComponentType::List => 40,
            ComponentType::Table => 80,
            ComponentType::Modal => 60,
            ComponentType::Navigation => 25,
            ComponentType::Chart => 150,
            ComponentType::Image => 20,
            ComponentType::Video => 300,
            ComponentType::Form => 45,
            ComponentType::Custom(_) => 75,
        };
        
        tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
        Ok(())
    }

    async fn simulate_component_interaction(&self, component: &str, component_type: &ComponentType) -> FrameworkResult<()> {
        let delay = match component_type {
            ComponentType::Button => 5,
            ComponentType::TextField => 10,
            ComponentType::List => 30,
            ComponentType::Table => 60,
            ComponentType::Modal => 40,
            ComponentType::Navigation => 20,
            ComponentType::Chart => 100,
            ComponentType::Image => 15,
            ComponentType::Video => 200,
            ComponentType::Form => 35,
            ComponentType::Custom(_) => 50,
        };
        
        tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
        Ok(())
    }

    async fn simulate_memory_usage(&self, component: &str, component_type: &ComponentType) -> u64 {
        // Simulate memory usage based on component type
        match component_type {
            ComponentType::Button => 2,
            ComponentType::TextField => 3,
            ComponentType::List => 15,
            ComponentType::Table => 30,
            ComponentType::Modal => 10,
            ComponentType::Navigation => 5,
            ComponentType::Chart => 50,
            ComponentType::Image => 20,
            ComponentType::Video => 100,
            ComponentType::Form => 8,
            ComponentType::Custom(_) => 25,
        }
    }

    async fn simulate_render(&self, component: &str) -> FrameworkResult<()> {
        let delay = match component {
            "button" => 5,
            "textfield" => 8,
            "list" => 25,
            "table" => 50,
            "modal" => 35,
            "navigation" => 15,
            _ => 20,
        };
        
        tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
        Ok(())
    }

    async fn simulate_interaction(&self, component: &str, interaction_type: &InteractionType) -> FrameworkResult<()> {
        let base_delay = match component {
            "button" => 5,
            "textfield" => 8,
            "list" => 20,
            "slider" => 10,
            "menu" => 3,
            _ => 10,
        };
        
        let multiplier = match interaction_type {
            InteractionType::Click => 1.0,
            InteractionType::Type => 2.0,
            InteractionType::Scroll => 1.5,
            InteractionType::Drag => 3.0,
            InteractionType::Hover => 0.5,
            InteractionType::Focus => 0.8,
            InteractionType::Keyboard => 1.2,
            _ => 1.0,
        };
        
        let delay = (base_delay as f64 * multiplier) as u64;
        tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
        Ok(())
    }

    async fn simulate_animation(&self, animation_name: &str, animation_type: &AnimationType) -> FrameworkResult<()> {
        let duration = match animation_type {
            AnimationType::Fade => 300,
            AnimationType::Slide => 500,
            AnimationType::Scale => 200,
            AnimationType::Bounce => 1000,
            AnimationType::Rotate => 800,
            AnimationType::Custom(_) => 400,
        };
        
        // Simulate animation frames
        let frame_count = duration / 16; // ~60 FPS
        for _ in 0..frame_count {
            tokio::time::sleep(tokio::time::Duration::from_millis(16)).await;
        }
        
        Ok(())
    }

    async fn simulate_memory_usage_cycle(&self, component: &str) -> FrameworkResult<()> {
        let cycle_count = match component {
            "list-large" => 100,
            "table-large" => 50,
            "chart-complex" => 20,
            "image-gallery" => 30,
            "video-player" => 10,
            _ => 25,
        };
        
        for _ in 0..cycle_count {
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
            // Simulate memory allocation
        }
        
        Ok(())
    }

    async fn simulate_network_request(&self, resource_name: &str, resource_type: &ResourceType) -> FrameworkResult<()> {
        let delay = match resource_type {
            ResourceType::JavaScript => 200,
            ResourceType::CSS => 50,
            ResourceType::Image => 150,
            ResourceType::Font => 100,
            ResourceType::HTML => 80,
            ResourceType::Audio => 2000,
            ResourceType::Video => 5000,
            ResourceType::Data => 300,
        };
        
        tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
        Ok(())
    }

    async fn get_current_memory_usage(&self) -> u64 {
        // In real implementation, this would query actual memory usage
        // For now, simulate based on pseudo-random component name
        let base_usage = match component_type_from_string("") {
            ComponentType::Button => 5,
            ComponentType::List => 25,
            ComponentType::Table => 50,
            ComponentType::Chart => 75,
            ComponentType::Video => 100,
            _ => 20,
        };
        
        // Add some variance
        base_usage + (uuid_hash(resource_name_hash("")) % 10)
    }

    /// Helper function to parse string to component type
    fn component_type_from_string(s: &str) -> ComponentType {
        match s {
            "button" => ComponentType::Button,
            "list" => ComponentType::List,
            "table" => ComponentType::Table,
            "chart" => ComponentType::Chart,
            "video" => ComponentType::Video,
            _ => ComponentType::Custom(s.to_string()),
        }
    }

    /// Calculate average value for a metric type
    fn calculate_average_metric(&self, measurements: &[PerformanceMeasurement], target_type: MetricType) -> f64 {
        let values: Vec<f64> = measurements
            .iter()
            .filter(|m| m.metric_type == target_type)
            .map(|m| m.value)
            .collect();
        
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }

    /// Calculate Lighthouse scores
    async fn calculate_lighthouse_scores(&self, report: &BenchmarkReport) -> FrameworkResult<LighthouseScores> {
        // Simulate Lighthouse scores based on benchmark results
        let avg_render_time = report.render_performance
            .iter()
            .map(|r| r.total_render_time_ms)
            .sum::<u64>() as f64 / report.render_performance.len() as f64;

        let avg_interaction_time = report.interaction_performance
            .iter()
            .map(|r| r.response_time_ms)
            .sum::<u64>() as f64 / report.interaction_performance.len() as f64;

        let performance = 100.0 - (avg_render_time / 10.0) - (avg_interaction_time / 5.0);
        let accessibility = 95.0; // Simulated
        let best_practices = 90.0; // Simulated
        let seo = 88.0; // Simulated
        let pwa = 75.0; // Simulated

        Ok(LighthouseScores {
            performance: performance.max(0.0),
            accessibility,
            best_practices,
            seo,
            pwa,
            first_contentful_paint_ms: (avg_render_time * 0.8) as u64,
            largest_contentful_paint_ms: (avg_render_time * 1.5) as u64,
            first_input_delay_ms: (avg_interaction_time * 0.5) as u64,
            cumulative_layout_shift: 0.1,
            speed_index_ms: (avg_render_time * 1.2) as u64,
            time_to_interactive_ms: (avg_render_time * 1.3) as u64,
            total_blocking_time_ms: (avg_interaction_time * 0.3) as u64,
        })
    }

    /// Calculate overall performance score
    fn calculate_overall_score(&self, report: &BenchmarkReport) -> f64 {
        let render_scores: Vec<f64> = report.render_performance
            .iter()
            .map(|r| if r.passed { 100.0 } else { 0.0 })
            .collect();

        let interaction_scores: Vec<f64> = report.interaction_performance
            .iter()
            .map(|r| if r.passed { 100.0 } else { 0.0 })
            .collect();

        let animation_scores: Vec<f64> = report.animation_performance
            .iter()
            .map(|r| if r.passed { 100.0 } else { 0.0 })
            .collect();

        let memory_scores: Vec<f64> = report.memory_performance
            .iter()
            .map(|r| if r.passed { 100.0 } else { 0.0 })
            .collect();

        let network_scores: Vec<f64> = report.network_performance
            .iter()
            .map(|r| if r.passed { 100.0 } else { 0.0 })
            .collect();

        let all_scores: Vec<f64> = render_scores
            .into_iter()
            .chain(interaction_scores.into_iter())
            .chain(animation_scores.into_iter())
            .chain(memory_scores.into_iter())
            .chain(network_scores.into_iter())
            .collect();

        if all_scores.is_empty() {
            0.0
        } else {
            all_scores.iter().sum::<f64>() / all_scores.len() as f64
        }
    }

    /// Collect performance issues and recommendations
    fn collect_performance_issues(
        &self,
        report: &BenchmarkReport,
        issues: &mut Vec<PerformanceIssue>,
        recommendations: &mut Vec<PerformanceRecommendation>,
    ) -> FrameworkResult<()> {
        // Collect issues from benchmarks
        for (name, benchmark) in &report.benchmarks {
            if !benchmark.passed {
                for issue in &benchmark.issues {
                    issues.push(PerformanceIssue {
                        id: Uuid::new_v4().to_string(),
                        title: format!("Performance issue in {}", name),
                        description: issue.clone(),
                        severity: IssueSeverity::High,
                        component: name.clone(),
                        metric: "load_time".to_string(),
                        current_value: format!("{}ms", benchmark.load_time_ms),
                        threshold_value: format!("{}ms", self.thresholds.max_load_time_ms),
                        impact: "Affects user experience".to_string(),
                        remediation: "Optimize component rendering".to_string(),
                    });
                }
            }
        }

        // Collect issues from render performance
        for result in &report.render_performance {
            if !result.passed {
                issues.push(PerformanceIssue {
                    id: Uuid::new_v4().to_string(),
                    title: format!("Slow render performance: {}", result.component_name),
                    description: format!("Render time {}ms exceeds 16ms target", result.total_render_time_ms),
                    severity: IssueSeverity::Medium,
                    component: result.component_name.clone(),
                    metric: "render_time".to_string(),
                    current_value: format!("{}ms", result.total_render_time_ms),
                    threshold_value: "16ms".to_string(),
                    impact: "May cause frame drops".to_string(),
                    remediation: "Optimize rendering pipeline".to_string(),
                });
            }
        }

        // Generate recommendations
        if report.render_performance.iter().any(|r| !r.passed) {
            recommendations.push(PerformanceRecommendation {
                id: "rec_render_optimization".to_string(),
                title: "Optimize Render Performance".to_string(),
                description: "Implement virtualization for large lists and optimize DOM updates",
                impact_estimate: ImpactEstimate::High,
                implementation_effort: ImplementationEffort::Medium,
                expected_improvement: "30-50% reduction in render time",
                related_issues: vec!["render_performance".to_string()],
                implementation_steps: vec![
                    "Implement list virtualization".to_string(),
                    "Use document fragments for batch updates".to_string(),
                    "Optimize CSS selectors".to_string(),
                ],
            });
        }

        if report.interaction_performance.iter().any(|r| !r.passed) {
            recommendations.push(PerformanceRecommendation {
                id: "rec_interaction_optimization".to_string(),
                title: "Improve Interaction Responsiveness".to_string(),
                description: "Reduce input delay and improve response times",
                impact_estimate: ImpactEstimate::Medium,
                implementation_effort: ImplementationEffort::Low,
                expected_improvement: "20-30% reduction in interaction latency",
                related_issues: vec!["interaction_performance".to_string()],
                implementation_steps: vec![
                    "Debounce input handlers".to_string(),
                    "Use requestAnimationFrame for UI updates".to_string(),
                    "Implement web workers for heavy computations".to_string(),
                ],
            });
        }

        if report.memory_performance.iter().any(|r| r.memory_leak_detected) {
            recommendations.push(PerformanceRecommendation {
                id: "rec_memory_management".to_string(),
                title: "Fix Memory Leaks".to_string(),
                description: "Implement proper memory management and cleanup",
                impact_estimate: ImpactEstimate::High,
                implementation_effort: ImplementationEffort::High,
                expected_improvement: "Eliminate memory leaks, reduce memory usage by 20-40%",
                related_issues: vec!["memory_leak".to_string()],
                implementation_steps: vec![
                    "Review event listener cleanup".to_string(),
                    "Implement proper component unmounting".to_string(),
                    "Use WeakMap for circular references".to_string(),
                ],
            });
        }

        Ok(())
    }
}

// Helper functions
fn component_type_from_string(s: &str) -> ComponentType {
    match s {
        "button" => ComponentType::Button,
        "list" => ComponentType::List,
        "table" => ComponentType::Table,
        "chart" => ComponentType::Chart,
        "video" => ComponentType::Video,
        _ => ComponentType::Custom(s.to_string()),
    }
}

fn uuid_hash(_s: &str) -> usize {
    // Simplified hash function
    42
}

fn resource_name_hash(_s: &str) -> usize {
    // Simplified hash function
    24
}

impl Default for LighthouseScores {
    fn default() -> Self {
        Self {
            performance: 0.0,
            accessibility: 0.0,
            best_practices: 0.0,
            seo: 0.0,
            pwa: 0.0,
            first_contentful_paint_ms: 0,
            largest_contentful_paint_ms: 0,
            first_input_delay_ms: 0,
            cumulative_layout_shift: 0.0,
            speed_index_ms: 0,
            time_to_interactive_ms: 0,
            total_blocking_time_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_component_type_ordering() {
        assert!(matches!(ComponentType::Button, ComponentType::Button));
        assert!(matches!(ComponentType::Custom(_), ComponentType::Custom(_)));
    }
    
    #[test]
    fn test_interaction_type_variants() {
        let click = InteractionType::Click;
        let drag = InteractionType::Drag;
        let type_interaction = InteractionType::Type;
        
        assert!(matches!(click, InteractionType::Click));
        assert!(matches!(drag, InteractionType::Drag));
        assert!(matches!(type_interaction, InteractionType::Type));
    }
    
    #[test]
    fn test_issue_severity_ordering() {
        assert!(IssueSeverity::Critical > IssueSeverity::High);
        assert!(IssueSeverity::High > IssueSeverity::Medium);
        assert!(IssueSeverity::Medium > IssueSeverity::Low);
    }
    
    #[test]
    fn test_impact_estimate_variants() {
        assert!(matches!(ImpactEstimate::High, ImpactEstimate::High));
        assert!(matches!(ImpactEstimate::Low, ImpactEstimate::Low));
        assert!(matches!(ImpactEstimate::VeryHigh, ImpactEstimate::VeryHigh));
    }
    
    #[test]
    fn test_performance_threshold_defaults() {
        let thresholds = PerformanceThresholds::default();
        assert_eq!(thresholds.max_load_time_ms, 2000);
        assert_eq!(thresholds.min_fps, 30);
        assert_eq!(thresholds.max_cpu_usage_percent, 80);
    }
}