//! Performance Profiling Module
//!
//! Provides comprehensive performance profiling for MultiOS UI components
//! including render performance, interaction latency, memory usage,
//! and resource optimization analysis.

use super::{FrameworkResult, FrameworkError, UIFrameworkConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use std::time::{Duration, Instant};
use log::info;

/// UI performance profiler
#[derive(Debug, Clone)]
pub struct UIProfiler {
    config: UIFrameworkConfig,
    profiling_engine: ProfilingEngine,
    metrics_collector: MetricsCollector,
    analysis_engine: PerformanceAnalysisEngine,
    optimization_engine: OptimizationEngine,
}

/// Profiling engine for collecting performance data
#[derive(Debug, Clone)]
pub struct ProfilingEngine {
    pub render_profiler: RenderProfiler,
    pub interaction_profiler: InteractionProfiler,
    pub memory_profiler: MemoryProfiler,
    pub resource_profiler: ResourceProfiler,
    pub timeline_profiler: TimelineProfiler,
}

/// Performance metrics collector
#[derive(Debug, Clone)]
pub struct MetricsCollector {
    pub metrics_store: MetricsStore,
    pub sampling_rate: f64,
    pub aggregation_methods: HashMap<MetricType, AggregationMethod>,
}

/// Performance analysis engine
#[derive(Debug, Clone)]
pub struct PerformanceAnalysisEngine {
    pub pattern_detector: PerformancePatternDetector,
    pub regression_analyzer: PerformanceRegressionAnalyzer,
    pub bottleneck_analyzer: BottleneckAnalyzer,
    pub optimization_analyzer: OptimizationAnalyzer,
}

/// Optimization engine for performance improvements
#[derive(Debug, Clone)]
pub struct OptimizationEngine {
    pub suggestion_generator: OptimizationSuggestionGenerator,
    pub impact_calculator: ImpactCalculator,
    pub implementation_tracker: ImplementationTracker,
}

/// Render performance profiler
#[derive(Debug, Clone)]
pub struct RenderProfiler {
    pub frame_rate_tracker: FrameRateTracker,
    pub render_time_tracker: RenderTimeTracker,
    pub paint_time_tracker: PaintTimeTracker,
    pub layout_time_tracker: LayoutTimeTracker,
    pub composite_time_tracker: CompositeTimeTracker,
}

/// Interaction performance profiler
#[derive(Debug, Clone)]
pub struct InteractionProfiler {
    pub input_latency_tracker: InputLatencyTracker,
    pub interaction_response_tracker: InteractionResponseTracker,
    pub gesture_tracker: GestureTracker,
    pub keyboard_tracker: KeyboardTracker,
    pub mouse_tracker: MouseTracker,
}

/// Memory usage profiler
#[derive(Debug, Clone)]
pub struct MemoryProfiler {
    pub heap_tracker: HeapTracker,
    pub stack_tracker: StackTracker,
    pub cache_tracker: CacheTracker,
    pub garbage_collection_tracker: GcTracker,
    pub memory_leak_detector: MemoryLeakDetector,
}

/// Resource usage profiler
#[derive(Debug, Clone)]
pub struct ResourceProfiler {
    pub cpu_tracker: CpuTracker,
    pub gpu_tracker: GpuTracker,
    pub network_tracker: NetworkTracker,
    pub disk_tracker: DiskTracker,
    pub battery_tracker: BatteryTracker,
}

/// Timeline profiler for tracking performance over time
#[derive(Debug, Clone)]
pub struct TimelineProfiler {
    pub timeline_data: TimelineData,
    pub event_tracker: EventTracker,
    pub performance_markers: PerformanceMarkers,
}

/// Performance metrics store
#[derive(Debug, Clone)]
pub struct MetricsStore {
    pub metrics: Vec<PerformanceMetric>,
    pub indexed_metrics: HashMap<String, Vec<PerformanceMetric>>,
    pub retention_policy: MetricsRetentionPolicy,
}

/// Metrics retention policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRetentionPolicy {
    pub max_entries: usize,
    pub max_age_days: u32,
    pub auto_cleanup: bool,
    pub compression_enabled: bool,
}

/// Performance metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub metric_id: String,
    pub metric_type: MetricType,
    pub component_name: String,
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
    pub context: HashMap<String, String>,
    pub metadata: MetricMetadata,
}

/// Metric types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MetricType {
    RenderTime,
    PaintTime,
    LayoutTime,
    CompositeTime,
    InteractionLatency,
    InputDelay,
    ScrollPerformance,
    AnimationFrameRate,
    MemoryUsage,
    HeapUsage,
    CacheHitRate,
    GcTime,
    CpuUsage,
    GpuUsage,
    NetworkLatency,
    NetworkThroughput,
    BatteryUsage,
    BundleSize,
    TimeToFirstPaint,
    TimeToInteractive,
    FirstInputDelay,
    CumulativeLayoutShift,
    LargestContentfulPaint,
    SpeedIndex,
    Custom(String),
}

/// Metric metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricMetadata {
    pub measurement_method: MeasurementMethod,
    pub confidence_level: f64,
    pub sampling_rate: f64,
    pub aggregation_count: u32,
    pub source: MetricSource,
}

/// Measurement methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MeasurementMethod {
    HighResolutionTimer,
    PerformanceAPI,
    BrowserMetrics,
    SystemMetrics,
    Custom(String),
}

/// Metric sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MetricSource {
    UserTiming,
    NavigationTiming,
    ResourceTiming,
    PaintTiming,
    Custom(String),
}

/// Aggregation methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AggregationMethod {
    Average,
    Median,
    Min,
    Max,
    Sum,
    Count,
    Percentile(u8), // e.g., P95, P99
    StandardDeviation,
    MovingAverage(u32),
    ExponentialMovingAverage(f64),
}

/// Frame rate tracking
#[derive(Debug, Clone)]
pub struct FrameRateTracker {
    pub current_fps: f32,
    pub target_fps: f32,
    pub frame_times: Vec<Duration>,
    pub dropped_frames: u32,
    pub smoothness_score: f64,
}

/// Render time tracking
#[derive(Debug, Clone)]
pub struct RenderTimeTracker {
    pub average_render_time: f64,
    pub min_render_time: f64,
    pub max_render_time: f64,
    pub render_times: Vec<f64>,
    pub trend: PerformanceTrend,
}

/// Paint time tracking
#[derive(Debug, Clone)]
pub struct PaintTimeTracker {
    pub average_paint_time: f64,
    pub paint_times: Vec<f64>,
    pub paint_operations: Vec<PaintOperation>,
    pub optimization_opportunities: Vec<PaintOptimization>,
}

/// Paint operation details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintOperation {
    pub operation_id: String,
    pub operation_type: PaintOperationType,
    pub start_time: Duration,
    pub duration: Duration,
    pub affected_area: PaintArea,
    pub cost_score: f64,
}

/// Paint operation types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PaintOperationType {
    Background,
    Border,
    Text,
    Image,
    Shadow,
    Gradient,
    Transform,
    Filter,
    Composite,
}

/// Paint area information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub overlap_count: u32,
}

/// Paint optimization suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintOptimization {
    pub optimization_type: PaintOptimizationType,
    pub description: String,
    pub impact_estimate: f64,
    pub implementation_effort: ImplementationEffort,
}

/// Paint optimization types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PaintOptimizationType {
    ReducePaintArea,
    OptimizePaintOrder,
    UseWillChange,
    AvoidPaintTriggers,
    BatchPaintOperations,
}

/// Implementation effort levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImplementationEffort {
    Minimal,
    Low,
    Medium,
    High,
}

/// Layout time tracking
#[derive(Debug, Clone)]
pub struct LayoutTimeTracker {
    pub average_layout_time: f64,
    pub layout_times: Vec<f64>,
    pub layout_operations: Vec<LayoutOperation>,
    pub reflow_triggers: Vec<ReflowTrigger>,
}

/// Layout operation details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutOperation {
    pub operation_id: String,
    pub operation_type: LayoutOperationType,
    pub affected_elements: Vec<String>,
    pub start_time: Duration,
    pub duration: Duration,
    pub complexity_score: f64,
}

/// Layout operation types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayoutOperationType {
    InitialLayout,
    Reflow,
    RecalculateStyle,
    UpdateLayerTree,
    Custom(String),
}

/// Reflow trigger information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflowTrigger {
    pub trigger_id: String,
    pub trigger_type: ReflowTriggerType,
    pub source_element: String,
    pub affected_scope: String,
    pub prevention_opportunities: Vec<ReflowPrevention>,
}

/// Reflow trigger types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReflowTriggerType {
    StyleChange,
    ContentChange,
    DimensionChange,
    PositionChange,
    DOMMutation,
}

/// Reflow prevention strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflowPrevention {
    pub prevention_type: ReflowPreventionType,
    pub description: String,
    pub expected_benefit: f64,
}

/// Reflow prevention types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReflowPreventionType {
    BatchStyleUpdates,
    UseTransform,
    Virtualization,
    OptimizeSelectors,
}

/// Composite time tracking
#[derive(Debug, Clone)]
pub struct CompositeTimeTracker {
    pub average_composite_time: f64,
    pub composite_times: Vec<f64>,
    pub layer_operations: Vec<LayerOperation>,
    pub gpu_usage: GpuUsageData,
}

/// Layer operation details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerOperation {
    pub operation_id: String,
    pub layer_type: LayerType,
    pub creation_cost: f64,
    pub memory_cost: f64,
    pub update_frequency: f64,
}

/// Layer types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerType {
    Regular,
    StackingContext,
    TransformLayer,
    FilterLayer,
    BackfaceVisibility,
    WillChange,
}

/// GPU usage data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuUsageData {
    pub usage_percentage: f32,
    pub memory_usage_mb: f32,
    pub texture_memory_mb: f32,
    pub buffer_memory_mb: f32,
}

/// Input latency tracking
#[derive(Debug, Clone)]
pub struct InputLatencyTracker {
    pub average_input_latency: f64,
    pub max_input_latency: f64,
    pub input_events: Vec<InputEvent>,
    pub latency_distribution: LatencyDistribution,
}

/// Input event details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputEvent {
    pub event_id: String,
    pub event_type: InputEventType,
    pub target_element: String,
    pub timestamp: DateTime<Utc>,
    pub processing_time: Duration,
    pub latency: Duration,
}

/// Input event types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputEventType {
    Click,
    MouseMove,
    MouseDown,
    MouseUp,
    KeyDown,
    KeyUp,
    TouchStart,
    TouchEnd,
    Scroll,
    Wheel,
}

/// Latency distribution analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyDistribution {
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub outliers: Vec<Outlier>,
}

/// Latency outlier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outlier {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub context: HashMap<String, String>,
}

/// Interaction response tracking
#[derive(Debug, Clone)]
pub struct InteractionResponseTracker {
    pub response_times: Vec<Duration>,
    pub response_time_average: f64,
    pub interactions: Vec<InteractionEvent>,
    pub bottlenecks: Vec<InteractionBottleneck>,
}

/// Interaction event details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub event_id: String,
    pub interaction_type: InteractionType,
    pub component_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: Duration,
    pub success: bool,
}

/// Interaction types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InteractionType {
    ButtonClick,
    FormSubmission,
    MenuOpen,
    ModalOpen,
    TabSwitch,
    AccordionToggle,
    DropdownSelect,
    SliderAdjust,
    DragDrop,
    PinchZoom,
}

/// Interaction bottleneck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionBottleneck {
    pub bottleneck_id: String,
    pub component_name: String,
    pub bottleneck_type: BottleneckType,
    pub average_delay: Duration,
    pub frequency: u32,
    pub impact_score: f64,
}

/// Bottleneck types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BottleneckType {
    SlowResponse,
    AnimationLag,
    EventHandlerDelay,
    StateUpdateDelay,
    RenderDelay,
    NetworkDelay,
}

/// Gesture tracking
#[derive(Debug, Clone)]
pub struct GestureTracker {
    pub gestures: Vec<GestureEvent>,
    pub recognition_accuracy: f64,
    pub response_times: Vec<Duration>,
}

/// Gesture event details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureEvent {
    pub event_id: String,
    pub gesture_type: GestureType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: Duration,
    pub accuracy: f64,
    pub path: GesturePath,
}

/// Gesture types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GestureType {
    Tap,
    DoubleTap,
    LongPress,
    Swipe,
    Pinch,
    Rotate,
    Pan,
}

/// Gesture path information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GesturePath {
    pub start_point: Point,
    pub end_point: Point,
    pub control_points: Vec<Point>,
    pub velocity: f32,
    pub direction: GestureDirection,
}

/// Point coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub timestamp: DateTime<Utc>,
}

/// Gesture directions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GestureDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Keyboard interaction tracking
#[derive(Debug, Clone)]
pub struct KeyboardTracker {
    pub keypresses: Vec<KeypressEvent>,
    pub response_times: Vec<Duration>,
    pub key_combinations: Vec<KeyCombination>,
}

/// Keypress event details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeypressEvent {
    pub event_id: String,
    pub key: String,
    pub modifiers: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub processing_time: Duration,
}

/// Key combination details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyCombination {
    pub combination: String,
    pub frequency: u32,
    pub average_response_time: Duration,
    pub context: String,
}

/// Mouse interaction tracking
#[derive(Debug, Clone)]
pub struct MouseTracker {
    pub mouse_events: Vec<MouseEvent>,
    pub movement_patterns: Vec<MovementPattern>,
    pub click_heatmap: ClickHeatmap,
}

/// Mouse event details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MouseEvent {
    pub event_id: String,
    pub event_type: MouseEventType,
    pub position: Point,
    pub timestamp: DateTime<Utc>,
    pub target_element: String,
    pub movement_distance: f32,
}

/// Mouse event types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MouseEventType {
    Move,
    Click,
    Down,
    Up,
    Enter,
    Leave,
    Wheel,
}

/// Mouse movement pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementPattern {
    pub pattern_id: String,
    pub pattern_type: MovementPatternType,
    pub frequency: u32,
    pub average_distance: f32,
    pub average_speed: f32,
}

/// Movement pattern types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MovementPatternType {
    Straight,
    Curved,
    Jerky,
    Circular,
    Random,
}

/// Click heatmap data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickHeatmap {
    pub resolution: (u32, u32),
    pub clicks: Vec<HeatmapPoint>,
    pub density_map: Vec<Vec<u32>>,
}

/// Heatmap point data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub x: u32,
    pub y: u32,
    pub intensity: u32,
    pub timestamp: DateTime<Utc>,
}

/// Memory tracking components
#[derive(Debug, Clone)]
pub struct HeapTracker {
    pub current_usage_mb: f64,
    pub peak_usage_mb: f64,
    pub allocation_rate: f64,
    pub deallocation_rate: f64,
    pub heap_snapshots: Vec<HeapSnapshot>,
}

/// Heap snapshot details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeapSnapshot {
    pub snapshot_id: String,
    pub timestamp: DateTime<Utc>,
    pub total_size_mb: f64,
    pub object_count: u32,
    pub largest_objects: Vec<LargestObject>,
    pub allocation_sites: Vec<AllocationSite>,
}

/// Largest object information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargestObject {
    pub object_type: String,
    pub size_mb: f64,
    pub allocation_time: DateTime<Utc>,
    pub retention_path: Vec<String>,
}

/// Allocation site details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSite {
    pub site_id: String,
    pub file_name: String,
    pub line_number: u32,
    pub allocation_count: u32,
    pub total_size_mb: f64,
    pub retention_score: f64,
}

/// Stack tracking
#[derive(Debug, Clone)]
pub struct StackTracker {
    pub current_stack_size: usize,
    pub max_stack_size: usize,
    pub stack_growth_rate: f64,
    pub stack_frames: Vec<StackFrame>,
}

/// Stack frame information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackFrame {
    pub frame_id: String,
    pub function_name: String,
    pub file_name: String,
    pub line_number: u32,
    pub column_number: u32,
    pub size_bytes: usize,
}

/// Cache tracking
#[derive(Debug, Clone)]
pub struct CacheTracker {
    pub hit_rate: f64,
    pub miss_rate: f64,
    pub cache_size_mb: f64,
    pub eviction_rate: f64,
    pub cache_entries: Vec<CacheEntry>,
}

/// Cache entry details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub entry_id: String,
    pub key: String,
    pub value_size_bytes: usize,
    pub access_count: u32,
    pub last_access: DateTime<Utc>,
    pub ttl_remaining: Option<Duration>,
}

/// Garbage collection tracking
#[derive(Debug, Clone)]
pub struct GcTracker {
    pub gc_frequency: f64,
    pub gc_duration: Duration,
    pub gc_pause_times: Vec<Duration>,
    pub collected_objects: u32,
    pub freed_memory_mb: f64,
    pub gc_types: Vec<GcEvent>,
}

/// GC event details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcEvent {
    pub event_id: String,
    pub gc_type: GcType,
    pub start_time: DateTime<Utc>,
    pub duration: Duration,
    pub objects_collected: u32,
    pub memory_freed_mb: f64,
}

/// GC types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GcType {
    Minor,
    Major,
    Full,
    Incremental,
}

/// Memory leak detector
#[derive(Debug, Clone)]
pub struct MemoryLeakDetector {
    pub leak_detection_enabled: bool,
    pub baseline_memory: f64,
    pub current_memory: f64,
    pub potential_leaks: Vec<MemoryLeak>,
    var leak_threshold_mb: f64,
}

/// Memory leak information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryLeak {
    pub leak_id: String,
    pub leak_type: MemoryLeakType,
    pub estimated_size_mb: f64,
    pub first_detected: DateTime<Utc>,
    pub growth_rate_mb_per_hour: f64,
    var affected_components: Vec<String>,
}

/// Memory leak types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MemoryLeakType {
    EventListener,
    Closure,
    DOMReference,
    Timer,
    Cache,
    CircularReference,
}

/// Resource tracking components
#[derive(Debug, Clone)]
pub struct CpuTracker {
    pub current_usage_percent: f32,
    pub peak_usage_percent: f32,
    var usage_history: Vec<CpuUsageSample>,
    var cpu_intensive_operations: Vec<CpuIntensiveOperation>,
}

/// CPU usage sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuUsageSample {
    pub timestamp: DateTime<Utc>,
    pub usage_percent: f32,
    pub core_usage: Vec<f32>,
    pub process_usage: HashMap<String, f32>,
}

/// CPU intensive operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuIntensiveOperation {
    pub operation_id: String,
    pub operation_type: CpuOperationType,
    pub start_time: DateTime<Utc>,
    pub duration: Duration,
    var cpu_consumption_percent: f32,
}

/// CPU operation types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CpuOperationType {
    Render,
    Animation,
    Computation,
    Layout,
    Paint,
    JavaScript,
}

/// GPU tracking
#[derive(Debug, Clone)]
pub struct GpuTracker {
    pub current_usage_percent: f32,
    var memory_usage_mb: f32,
    var gpu_operations: Vec<GpuOperation>,
    var performance_counters: HashMap<String, f32>,
}

/// GPU operation details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuOperation {
    pub operation_id: String,
    pub operation_type: GpuOperationType,
    var start_time: DateTime<Utc>,
    var duration: Duration,
    var memory_used_mb: f32,
}

/// GPU operation types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GpuOperationType {
    TextureUpload,
    ShaderExecution,
    BufferUpdate,
    RenderPass,
    ComputePass,
}

/// Network tracking
#[derive(Debug, Clone)]
pub struct NetworkTracker {
    var current_latency: Duration,
    var throughput_mbps: f64,
    var requests: Vec<NetworkRequest>,
    var connection_pool: ConnectionPool,
}

/// Network request details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub request_id: String,
    pub url: String,
    var request_type: RequestType,
    var start_time: DateTime<Utc>,
    var duration: Duration,
    var response_size_bytes: u64,
    var status_code: u16,
}

/// Request types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RequestType {
    XHR,
    Fetch,
    WebSocket,
    ServerSentEvents,
    Image,
    Script,
    Stylesheet,
}

/// Connection pool information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionPool {
    var active_connections: u32,
    var idle_connections: u32,
    var max_connections: u32,
    var pool_efficiency: f64,
}

/// Disk tracking
#[derive(Debug, Clone)]
pub struct DiskTracker {
    var read_speed_mbps: f64,
    var write_speed_mbps: f64,
    var storage_usage_mb: f64,
    var io_operations: Vec<IoOperation>,
}

/// I/O operation details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoOperation {
    var operation_id: String,
    var operation_type: IoOperationType,
    var start_time: DateTime<Utc>,
    var duration: Duration,
    var bytes_transferred: u64,
}

/// I/O operation types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum IoOperationType {
    Read,
    Write,
    Sync,
    Async,
}

/// Battery tracking
#[derive(Debug, Clone)]
pub struct BatteryTracker {
    var battery_level: f32,
    var battery_drain_rate: f64,
    var power_consumption_mw: f64,
    var estimated_usage_time: Duration,
    var power_events: Vec<PowerEvent>,
}

/// Power event details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerEvent {
    var event_id: String,
    var event_type: PowerEventType,
    var timestamp: DateTime<Utc>,
    var battery_level: f32,
    var power_consumption_mw: f64,
}

/// Power event types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PowerEventType {
    BatteryLow,
    BatteryCritical,
    ChargingStarted,
    ChargingStopped,
    PowerModeChange,
}

/// Timeline data structure
#[derive(Debug, Clone)]
pub struct TimelineData {
    var events: Vec<TimelineEvent>,
    var markers: Vec<TimelineMarker>,
    var tracks: Vec<PerformanceTrack>,
}

/// Timeline event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    var event_id: String,
    var event_type: TimelineEventType,
    var start_time: Duration,
    var duration: Duration,
    var thread_id: String,
    var stack_trace: Vec<String>,
}

/// Timeline event types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TimelineEventType {
    Script,
    Render,
    Paint,
    Layout,
    Composite,
    Task,
    Idle,
}

/// Timeline marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineMarker {
    var marker_id: String,
    var marker_type: MarkerType,
    var timestamp: Duration,
    var label: String,
    var data: HashMap<String, String>,
}

/// Marker types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MarkerType {
    Custom,
    NavigationStart,
    FirstPaint,
    FirstContentfulPaint,
    LargestContentfulPaint,
    TimeToInteractive,
}

/// Performance track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceTrack {
    var track_id: String,
    var track_type: TrackType,
    var events: Vec<String>,
    var color: String,
}

/// Track types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrackType {
    Main,
    Worker,
    Gpu,
    Network,
    Custom(String),
}

/// Event tracking
#[derive(Debug, Clone)]
pub struct EventTracker {
    var custom_events: Vec<CustomEvent>,
    var event_handlers: Vec<EventHandler>,
    var event_performance: HashMap<String, EventPerformance>,
}

/// Custom event details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomEvent {
    var event_id: String,
    var event_name: String,
    var timestamp: DateTime<Utc>,
    var duration: Duration,
    var properties: HashMap<String, String>,
}

/// Event handler information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventHandler {
    var handler_id: String,
    var event_type: String,
    var target_element: String,
    var execution_count: u32,
    var average_execution_time: Duration,
}

/// Event performance data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPerformance {
    var total_events: u32,
    var average_latency: Duration,
    var max_latency: Duration,
    var error_rate: f64,
}

/// Performance markers
#[derive(Debug, Clone)]
pub struct PerformanceMarkers {
    var custom_markers: Vec<CustomMarker>,
    var navigation_markers: Vec<NavigationMarker>,
    var user_timing_markers: Vec<UserTimingMarker>,
}

/// Custom marker details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomMarker {
    var marker_id: String,
    var marker_name: String,
    var timestamp: DateTime<Utc>,
    var start_time: Duration,
    var duration: Duration,
}

/// Navigation marker details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationMarker {
    var marker_type: NavigationMarkerType,
    var timestamp: DateTime<Utc>,
    var start_time: Duration,
    var duration: Duration,
}

/// Navigation marker types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NavigationMarkerType {
    NavigationStart,
    DomContentLoaded,
    LoadEventStart,
    LoadEventEnd,
    FirstPaint,
    FirstContentfulPaint,
}

/// User timing marker details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTimingMarker {
    var name: String,
    var start_time: Duration,
    var duration: Duration,
    var start_time_precise: Duration,
    var duration_precise: Duration,
}

/// Performance pattern detector
#[derive(Debug, Clone)]
pub struct PerformancePatternDetector {
    var patterns: Vec<PerformancePattern>,
    var pattern_matcher: PatternMatcher,
    var anomaly_detector: AnomalyDetector,
}

/// Performance pattern information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformancePattern {
    var pattern_id: String,
    var pattern_type: PerformancePatternType,
    var description: String,
    var conditions: Vec<PatternCondition>,
    var impact_assessment: PatternImpact,
}

/// Performance pattern types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PerformancePatternType {
    FrameDrop,
    MemoryLeak,
    CpuSpike,
    NetworkSlowdown,
    LayoutShift,
    PaintStorm,
    AnimationLag,
    CacheMiss,
    GcPause,
}

/// Pattern condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternCondition {
    var condition_type: ConditionType,
    var metric_name: String,
    var threshold_value: f64,
    var comparison_operator: ComparisonOperator,
}

/// Pattern impact assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternImpact {
    var user_experience_impact: UserExperienceImpact,
    var performance_impact: PerformanceImpact,
    var resource_impact: ResourceImpact,
}

/// User experience impact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserExperienceImpact {
    var perceived_performance: f64,
    var interaction_responsiveness: f64,
    var visual_stability: f64,
    var accessibility_impact: AccessibilityImpact,
}

/// Performance impact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceImpact {
    var render_performance: f64,
    var interaction_performance: f64,
    var memory_performance: f64,
    var network_performance: f64,
}

/// Resource impact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceImpact {
    var cpu_usage_impact: f64,
    var memory_usage_impact: f64,
    var gpu_usage_impact: f64,
    var network_usage_impact: f64,
}

/// Accessibility impact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityImpact {
    var screen_reader_impact: f64,
    var keyboard_navigation_impact: f64,
    var motor_disability_impact: f64,
    var cognitive_load_impact: f64,
}

/// Pattern matcher
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    var matching_algorithms: Vec<PatternMatchingAlgorithm>,
    var pattern_library: PatternLibrary,
    var confidence_threshold: f64,
}

/// Pattern matching algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PatternMatchingAlgorithm {
    Threshold,
    Statistical,
    MachineLearning,
    RuleBased,
    Custom(String),
}

/// Pattern library
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    var known_patterns: Vec<KnownPattern>,
    var custom_patterns: Vec<CustomPattern>,
}

/// Known performance pattern
#[derive(Debug, Clone)]
pub struct KnownPattern {
    var pattern_id: String,
    var pattern_name: String,
    var pattern_signature: PatternSignature,
    var remediation_strategies: Vec<RemediationStrategy>,
}

/// Pattern signature for identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSignature {
    var metric_signatures: Vec<MetricSignature>,
    var temporal_signature: TemporalSignature,
    var contextual_signature: ContextualSignature,
}

/// Metric signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSignature {
    var metric_type: MetricType,
    var value_range: (f64, f64),
    var frequency_pattern: FrequencyPattern,
}

/// Temporal signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalSignature {
    var duration_pattern: DurationPattern,
    var occurrence_pattern: OccurrencePattern,
    var correlation_pattern: CorrelationPattern,
}

/// Contextual signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextualSignature {
    var component_context: Vec<String>,
    var user_action_context: Vec<String>,
    var environment_context: HashMap<String, String>,
}

/// Frequency patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FrequencyPattern {
    Continuous,
    Intermittent,
    Periodic,
    Spikes,
}

/// Duration patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DurationPattern {
    Short,
    Medium,
    Long,
    Variable,
}

/// Occurrence patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OccurrencePattern {
    Startup,
    Interaction,
    Periodic,
    EventDriven,
}

/// Correlation patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CorrelationPattern {
    Independent,
    Correlated,
    Cascading,
    Causative,
}

/// Remediation strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationStrategy {
    var strategy_id: String,
    var strategy_name: String,
    var implementation_steps: Vec<String>,
    var expected_improvement: f64,
    var effort_level: ImplementationEffort,
    var risk_level: RiskLevel,
}

/// Risk levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Custom pattern definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPattern {
    var pattern_id: String,
    var pattern_name: String,
    var definition: CustomPatternDefinition,
    var validation_rules: Vec<ValidationRule>,
}

/// Custom pattern definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPatternDefinition {
    var matching_criteria: Vec<MatchingCriterion>,
    var exclusion_criteria: Vec<ExclusionCriterion>,
    var pattern_weights: HashMap<String, f64>,
}

/// Matching criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingCriterion {
    var criterion_type: CriterionType,
    var metric_name: String,
    var expected_pattern: PatternDefinition,
    var weight: f64,
}

/// Exclusion criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionCriterion {
    var criterion_type: CriterionType,
    var metric_name: String,
    var exclusion_pattern: PatternDefinition,
    var weight: f64,
}

/// Pattern definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDefinition {
    var value_pattern: ValuePattern,
    var temporal_pattern: TemporalPattern,
    var magnitude_pattern: MagnitudePattern,
}

/// Value patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ValuePattern {
    Exact(f64),
    Range(f64, f64),
    Above(f64),
    Below(f64),
    Trend(TrendDirection),
    Distribution(DistributionType),
}

/// Trend directions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    Volatile,
}

/// Distribution types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DistributionType {
    Normal,
    Uniform,
    Exponential,
    Bimodal,
    Skewed,
}

/// Temporal patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TemporalPattern {
    Immediate,
    Delayed(Duration),
    Periodic(Duration),
    Random,
}

/// Magnitude patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MagnitudePattern {
    Small,
    Medium,
    Large,
    Massive,
    Scalable,
}

/// Anomaly detector
#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    var detection_algorithms: Vec<AnomalyDetectionAlgorithm>,
    var anomaly_threshold: f64,
    var false_positive_rate: f64,
    var detection_sensitivity: f64,
}

/// Anomaly detection algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnomalyDetectionAlgorithm {
    StatisticalOutlier,
    ZScore,
    IsolationForest,
    LocalOutlierFactor,
    Custom(String),
}

/// Performance regression analyzer
#[derive(Debug, Clone)]
pub struct PerformanceRegressionAnalyzer {
    var baseline_comparator: BaselineComparator,
    var trend_analyzer: RegressionTrendAnalyzer,
    var statistical_tester: StatisticalTester,
    var regression_detector: RegressionDetector,
}

/// Baseline comparator
#[derive(Debug, Clone)]
pub struct BaselineComparator {
    var baselines: HashMap<String, PerformanceBaseline>,
    var comparison_method: ComparisonMethod,
    var significance_level: f64,
}

/// Performance baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceBaseline {
    var baseline_id: String,
    var baseline_name: String,
    var creation_date: DateTime<Utc>,
    var metric_values: HashMap<MetricType, BaselineValue>,
    var environment: BaselineEnvironment,
    var confidence_interval: ConfidenceInterval,
}

/// Baseline value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineValue {
    var value: f64,
    var standard_deviation: f64,
    var sample_size: u32,
    var measurement_method: MeasurementMethod,
}

/// Baseline environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineEnvironment {
    var platform: String,
    var browser: String,
    var device_type: String,
    var screen_resolution: String,
    var network_conditions: String,
}

/// Confidence interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    var lower_bound: f64,
    var upper_bound: f64,
    var confidence_level: f64,
    var method: ConfidenceMethod,
}

/// Confidence methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConfidenceMethod {
    TDistribution,
    NormalDistribution,
    Bootstrap,
    Bayesian,
}

/// Comparison methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ComparisonMethod {
    Absolute,
    Relative,
    Percentage,
    ZScore,
    Statistical,
}

/// Regression trend analyzer
#[derive(Debug, Clone)]
pub struct RegressionTrendAnalyzer {
    var trend_algorithms: Vec<TrendAnalysisAlgorithm>,
    var trend_significance_threshold: f64,
    var trend_history: Vec<TrendAnalysisResult>,
}

/// Trend analysis algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrendAnalysisAlgorithm {
    LinearRegression,
    PolynomialRegression,
    MovingAverage,
    ExponentialSmoothing,
    SeasonalDecomposition,
    Custom(String),
}

/// Trend analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysisResult {
    var result_id: String,
    var analysis_date: DateTime<Utc>,
    var metric_type: MetricType,
    var trend_direction: TrendDirection,
    var trend_strength: f64,
    var significance: f64,
    var prediction: TrendPrediction,
}

/// Trend prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPrediction {
    var predicted_value: f64,
    var prediction_confidence: f64,
    var prediction_horizon: Duration,
    var confidence_interval: (f64, f64),
}

/// Statistical tester
#[derive(Debug, Clone)]
pub struct StatisticalTester {
    var test_methods: Vec<StatisticalTestMethod>,
    var significance_level: f64,
    var power: f64,
}

/// Statistical test methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StatisticalTestMethod {
    TTest,
    WilcoxonTest,
    KolmogorovSmirnov,
    MannWhitneyU,
    Custom(String),
}

/// Regression detector
#[derive(Debug, Clone)]
pub struct RegressionDetector {
    var detection_criteria: Vec<RegressionCriterion>,
    var false_positive_tolerance: f64,
    var sensitivity_adjustment: f64,
}

/// Regression criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionCriterion {
    var criterion_id: String,
    var metric_type: MetricType,
    var regression_threshold: f64,
    var comparison_baseline: String,
}

/// Bottleneck analyzer
#[derive(Debug, Clone)]
pub struct BottleneckAnalyzer {
    var analysis_methods: Vec<BottleneckAnalysisMethod>,
    var bottleneck_classifier: BottleneckClassifier,
    var impact_assessor: BottleneckImpactAssessor,
}

/// Bottleneck analysis methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BottleneckAnalysisMethod {
    ResourceUtilization,
    QueueAnalysis,
    CriticalPath,
    CorrelationAnalysis,
    Custom(String),
}

/// Bottleneck classifier
#[derive(Debug, Clone)]
pub struct BottleneckClassifier {
    var classification_rules: Vec<ClassificationRule>,
    var severity_assessor: BottleneckSeverityAssessor,
}

/// Classification rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRule {
    var rule_id: String,
    var bottleneck_type: BottleneckType,
    var conditions: Vec<ClassificationCondition>,
    var confidence: f64,
}

/// Classification condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationCondition {
    var condition_type: ConditionType,
    var metric_name: String,
    var operator: ComparisonOperator,
    var threshold_value: f64,
}

/// Bottleneck severity assessor
#[derive(Debug, Clone)]
pub struct BottleneckSeverityAssessor {
    var severity_indicators: Vec<SeverityIndicator>,
    var impact_weights: HashMap<BottleneckType, f64>,
}

/// Severity indicator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityIndicator {
    var indicator_type: SeverityIndicatorType,
    var measurement: f64,
    var weight: f64,
    var contribution: f64,
}

/// Severity indicator types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SeverityIndicatorType {
    Performance,
    Frequency,
    UserImpact,
    ResourceUsage,
}

/// Bottleneck impact assessor
#[derive(Debug, Clone)]
pub struct BottleneckImpactAssessor {
    var impact_criteria: Vec<ImpactCriterion>,
    var user_experience_model: UserExperienceModel,
}

/// Impact criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactCriterion {
    var criterion_type: ImpactCriterionType,
    var measurement: f64,
    var scaling_factor: f64,
    var contribution: f64,
}

/// Impact criterion types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImpactCriterionType {
    ResponseTime,
    UserFrustration,
    TaskCompletion,
    Accessibility,
}

/// User experience model
#[derive(Debug, Clone)]
pub struct UserExperienceModel {
    var satisfaction_weights: HashMap<String, f64>,
    var perception_factors: HashMap<String, f64>,
    var tolerance_thresholds: HashMap<String, f64>,
}

/// Optimization analyzer
#[derive(Debug, Clone)]
pub struct OptimizationAnalyzer {
    var optimization_opportunities: Vec<OptimizationOpportunity>,
    var optimization_impact_calculator: OptimizationImpactCalculator,
    var implementation_priority: ImplementationPriorityCalculator,
}

/// Optimization opportunity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationOpportunity {
    var opportunity_id: String,
    var optimization_type: OptimizationType,
    var target_metrics: Vec<MetricType>,
    var estimated_improvement: f64,
    var implementation_effort: ImplementationEffort,
    var priority_score: f64,
}

/// Optimization types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationType {
    CodeOptimization,
    ResourceOptimization,
    AlgorithmImprovement,
    CachingStrategy,
    LazyLoading,
    CodeSplitting,
    BundleOptimization,
    ImageOptimization,
}

/// Optimization impact calculator
#[derive(Debug, Clone)]
pub struct OptimizationImpactCalculator {
    var impact_models: HashMap<OptimizationType, ImpactModel>,
    var validation_methods: Vec<ValidationMethod>,
}

/// Impact model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactModel {
    var model_type: ImpactModelType,
    var parameters: HashMap<String, f64>,
    var accuracy: f64,
    var validation_results: Vec<ValidationResult>,
}

/// Impact model types
#[#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImpactModelType {
    Linear,
    Exponential,
    Polynomial,
    MachineLearning,
}

/// Validation method
#[#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ValidationMethod {
    ATest,
    CrossValidation,
    HistoricalAnalysis,
    Simulation,
}

/// Validation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    var validation_id: String,
    var method: ValidationMethod,
    var accuracy: f64,
    var confidence_interval: ConfidenceInterval,
    var test_date: DateTime<Utc>,
}

/// Implementation priority calculator
#[derive(Debug, Clone)]
pub struct ImplementationPriorityCalculator {
    var priority_factors: HashMap<PriorityFactor, f64>,
    var scoring_method: PriorityScoringMethod,
}

/// Priority factors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PriorityFactor {
    Impact,
    Effort,
    Risk,
    Dependencies,
    Urgency,
}

/// Priority scoring methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PriorityScoringMethod {
    WeightedSum,
    Multiplicative,
    ExpertSystem,
    MachineLearning,
}

/// Optimization suggestion generator
#[derive(Debug, Clone)]
pub struct OptimizationSuggestionGenerator {
    var suggestion_templates: HashMap<OptimizationType, SuggestionTemplate>,
    var context_analyzer: ContextAnalyzer,
    var personalization_engine: PersonalizationEngine,
}

/// Suggestion template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionTemplate {
    var template_id: String,
    var optimization_type: OptimizationType,
    var title: String,
    var description: String,
    var implementation_steps: Vec<String>,
    var code_examples: Vec<CodeExample>,
    var expected_benefits: Vec<ExpectedBenefit>,
}

/// Code example
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeExample {
    var language: String,
    var before_code: String,
    var after_code: String,
    var explanation: String,
}

/// Expected benefit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedBenefit {
    var benefit_type: BenefitType,
    var estimated_improvement: f64,
    var measurement_unit: String,
    var confidence: f64,
}

/// Benefit types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BenefitType {
    Performance,
    Memory,
    Network,
    UserExperience,
    Accessibility,
    SEO,
}

/// Context analyzer
#[derive(Debug, Clone)]
pub struct ContextAnalyzer {
    var context_factors: Vec<ContextFactor>,
    var constraint_analyzer: ConstraintAnalyzer,
}

/// Context factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextFactor {
    var factor_type: ContextFactorType,
    var value: String,
    var weight: f64,
    var impact_on_suggestions: f64,
}

/// Context factor types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContextFactorType {
    TechnologyStack,
    BrowserSupport,
    DeviceCapabilities,
    UserBase,
    BusinessConstraints,
}

/// Constraint analyzer
#[derive(Debug, Clone)]
pub struct ConstraintAnalyzer {
    var constraints: Vec<Constraint>,
    var feasibility_assessor: FeasibilityAssessor,
}

/// Constraint information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    var constraint_id: String,
    var constraint_type: ConstraintType,
    var description: String,
    var impact_level: f64,
    var flexibility: f64,
}

/// Constraint types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConstraintType {
    Technical,
    Budget,
    Timeline,
    Compatibility,
    Security,
}

/// Feasibility assessor
#[derive(Debug, Clone)]
pub struct FeasibilityAssessor {
    var feasibility_factors: HashMap<FeasibilityFactor, f64>,
    var assessment_method: FeasibilityAssessmentMethod,
}

/// Feasibility factors
#[#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FeasibilityFactor {
    TechnicalComplexity,
    ResourceAvailability,
    RiskLevel,
    Dependencies,
}

/// Feasibility assessment methods
#[#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FeasibilityAssessmentMethod {
    ExpertJudgment,
    HistoricalData,
    MachineLearning,
    Hybrid,
}

/// Personalization engine
#[#[derive(Debug, Clone)]
pub struct PersonalizationEngine {
    var user_preferences: HashMap<String, String>,
    var skill_level_assessor: SkillLevelAssessor,
    var learning_history: LearningHistory,
}

/// Skill level assessor
#[derive(Debug, Clone)]
pub struct SkillLevelAssessor {
    var skill_metrics: HashMap<String, SkillLevel>,
    var assessment_criteria: Vec<SkillAssessmentCriteria>,
}

/// Skill levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Skill assessment criteria
#[#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAssessmentCriteria {
    var skill_type: String,
    var assessment_method: String,
    var confidence: f64,
}

/// Learning history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningHistory {
    var completed_optimizations: Vec<String>,
    var preference_changes: Vec<PreferenceChange>,
    var effectiveness_ratings: HashMap<String, f64>,
}

/// Preference change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceChange {
    var preference_key: String,
    var old_value: String,
    var new_value: String,
    var change_date: DateTime<Utc>,
}

/// Impact calculator for optimizations
#[derive(Debug, Clone)]
pub struct ImpactCalculator {
    var calculation_models: HashMap<ImpactType, ImpactCalculationModel>,
    var validation_framework: ImpactValidationFramework,
}

/// Impact types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImpactType {
    Performance,
    UserExperience,
    ResourceUsage,
    Accessibility,
    SEO,
    Business,
}

/// Impact calculation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactCalculationModel {
    var model_id: String,
    var impact_type: ImpactType,
    var calculation_formula: String,
    var parameters: HashMap<String, f64>,
    var accuracy: f64,
}

/// Impact validation framework
#[derive(Debug, Clone)]
pub struct ImpactValidationFramework {
    var validation_methods: Vec<ImpactValidationMethod>,
    var accuracy_tracker: ImpactAccuracyTracker,
}

/// Impact validation methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImpactValidationMethod {
    ATestValidation,
    HistoricalValidation,
    SimulationValidation,
    ExpertValidation,
}

/// Impact accuracy tracker
#[derive(Debug, Clone)]
pub struct ImpactAccuracyTracker {
    var accuracy_history: Vec<AccuracyRecord>,
    var average_accuracy: f64,
}

/// Accuracy record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyRecord {
    var record_id: String,
    var predicted_impact: f64,
    var actual_impact: f64,
    var accuracy_score: f64,
    var validation_date: DateTime<Utc>,
}

/// Implementation tracker
#[derive(Debug, Clone)]
pub struct ImplementationTracker {
    var implementation_plans: HashMap<String, ImplementationPlan>,
    var progress_monitor: ProgressMonitor,
    var success_predictor: SuccessPredictor,
}

/// Implementation plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationPlan {
    var plan_id: String,
    var optimization_id: String,
    var implementation_steps: Vec<ImplementationStep>,
    var timeline: ImplementationTimeline,
    var resource_requirements: ResourceRequirements,
    var success_criteria: Vec<SuccessCriterion>,
}

/// Implementation step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationStep {
    var step_id: String,
    var step_name: String,
    var description: String,
    var estimated_duration: Duration,
    var dependencies: Vec<String>,
    var status: StepStatus,
}

/// Step status
#[#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StepStatus {
    NotStarted,
    InProgress,
    Completed,
    Blocked,
    Failed,
}

/// Implementation timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationTimeline {
    var start_date: DateTime<Utc>,
    var end_date: DateTime<Utc>,
    var milestones: Vec<Milestone>,
    var critical_path: Vec<String>,
}

/// Milestone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    var milestone_id: String,
    var name: String,
    var due_date: DateTime<Utc>,
    var completion_status: CompletionStatus,
}

/// Completion status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompletionStatus {
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

/// Resource requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRequirements {
    var developer_hours: f64,
    var hardware_requirements: Vec<HardwareRequirement>,
    var software_requirements: Vec<SoftwareRequirement>,
    var third_party_dependencies: Vec<String>,
}

/// Hardware requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareRequirement {
    var resource_type: String,
    var specification: String,
    var quantity: u32,
}

/// Software requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareRequirement {
    var software_name: String,
    var version: String,
    var license_type: String,
}

/// Success criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessCriterion {
    var criterion_id: String,
    var metric_type: MetricType,
    var target_value: f64,
    var measurement_method: String,
    var priority: CriterionPriority,
}

/// Criterion priority
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CriterionPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// Progress monitor
#[derive(Debug, Clone)]
pub struct ProgressMonitor {
    var monitoring_frequency: Duration,
    var progress_tracking: ProgressTracking,
    var alert_system: ProgressAlertSystem,
}

/// Progress tracking
#[derive(Debug, Clone)]
pub struct ProgressTracking {
    var current_progress: f64,
    var progress_history: Vec<ProgressSnapshot>,
    var velocity: f64,
}

/// Progress snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    var snapshot_id: String,
    var timestamp: DateTime<Utc>,
    var completion_percentage: f64,
    var completed_tasks: u32,
    var remaining_tasks: u32,
}

/// Progress alert system
#[derive(Debug, Clone)]
pub struct ProgressAlertSystem {
    var alert_thresholds: HashMap<AlertType, f64>,
    var alert_history: Vec<AlertEvent>,
}

/// Alert types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlertType {
    BehindSchedule,
    BudgetExceeded,
    ResourceShortage,
    QualityIssue,
}

/// Alert event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertEvent {
    var event_id: String,
    var alert_type: AlertType,
    var timestamp: DateTime<Utc>,
    var severity: AlertSeverity,
    var message: String,
}

/// Success predictor
#[derive(Debug, Clone)]
pub struct SuccessPredictor {
    var prediction_models: HashMap<String, PredictionModel>,
    var success_factors: SuccessFactors,
}

/// Prediction model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionModel {
    var model_id: String,
    var model_type: PredictionModelType,
    var accuracy: f64,
    var training_data: TrainingDataSummary,
}

/// Prediction model types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PredictionModelType {
    LinearRegression,
    DecisionTree,
    RandomForest,
    NeuralNetwork,
}

/// Training data summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingDataSummary {
    var sample_count: u32,
    var feature_count: u32,
    var training_accuracy: f64,
    var validation_accuracy: f64,
}

/// Success factors
#[derive(Debug, Clone)]
pub struct SuccessFactors {
    var factor_weights: HashMap<String, f64>,
    var historical_success_patterns: Vec<SuccessPattern>,
}

/// Success pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessPattern {
    var pattern_id: String,
    var pattern_description: String,
    var success_rate: f64,
    var frequency: u32,
}

/// Performance trend information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceTrend {
    var direction: TrendDirection,
    var strength: f64,
    var confidence: f64,
    var slope: f64,
    var intercept: f64,
}

/// Performance data structures implementation
impl UIProfiler {
    /// Create a new UI performance profiler
    pub fn new(config: &UIFrameworkConfig) -> Self {
        Self {
            config: config.clone(),
            profiling_engine: ProfilingEngine {
                render_profiler: RenderProfiler {
                    frame_rate_tracker: FrameRateTracker {
                        current_fps: 0.0,
                        target_fps: 60.0,
                        frame_times: Vec::new(),
                        dropped_frames: 0,
                        smoothness_score: 0.0,
                    },
                    render_time_tracker: RenderTimeTracker {
                        average_render_time: 0.0,
                        min_render_time: f64::MAX,
                        max_render_time: 0.0,
                        render_times: Vec::new(),
                        trend: PerformanceTrend {
                            direction: TrendDirection::Stable,
                            strength: 0.0,
                            confidence: 0.0,
                            slope: 0.0,
                            intercept: 0.0,
                        },
                    },
                    paint_time_tracker: PaintTimeTracker {
                        average_paint_time: 0.0,
                        paint_times: Vec::new(),
                        paint_operations: Vec::new(),
                        optimization_opportunities: Vec::new(),
                    },
                    layout_time_tracker: LayoutTimeTracker {
                        average_layout_time: 0.0,
                        layout_times: Vec::new(),
                        layout_operations: Vec::new(),
                        reflow_triggers: Vec::new(),
                    },
                    composite_time_tracker: CompositeTimeTracker {
                        average_composite_time: 0.0,
                        composite_times: Vec::new(),
                        layer_operations: Vec::new(),
                        gpu_usage: GpuUsageData {
                            usage_percentage: 0.0,
                            memory_usage_mb: 0.0,
                            texture_memory_mb: 0.0,
                            buffer_memory_mb: 0.0,
                        },
                    },
                },
                interaction_profiler: InteractionProfiler {
                    input_latency_tracker: InputLatencyTracker {
                        average_input_latency: 0.0,
                        max_input_latency: 0.0,
                        input_events: Vec::new(),
                        latency_distribution: LatencyDistribution {
                            p50: 0.0,
                            p90: 0.0,
                            p95: 0.0,
                            p99: 0.0,
                            outliers: Vec::new(),
                        },
                    },
                    interaction_response_tracker: InteractionResponseTracker {
                        response_times: Vec::new(),
                        response_time_average: 0.0,
                        interactions: Vec::new(),
                        bottlenecks: Vec::new(),
                    },
                    gesture_tracker: GestureTracker {
                        gestures: Vec::new(),
                        recognition_accuracy: 0.0,
                        response_times: Vec::new(),
                    },
                    keyboard_tracker: KeyboardTracker {
                        keypresses: Vec::new(),
                        response_times: Vec::new(),
                        key_combinations: Vec::new(),
                    },
                    mouse_tracker: MouseTracker {
                        mouse_events: Vec::new(),
                        movement_patterns: Vec::new(),
                        click_heatmap: ClickHeatmap {
                            resolution: (1920, 1080),
                            clicks: Vec::new(),
                            density_map: Vec::new(),
                        },
                    },
                },
                memory_profiler: MemoryProfiler {
                    heap_tracker: HeapTracker {
                        current_usage_mb: 0.0,
                        peak_usage_mb: 0.0,
                        allocation_rate: 0.0,
                        deallocation_rate: 0.0,
                        heap_snapshots: Vec::new(),
                    },
                    stack_tracker: StackTracker {
                        current_stack_size: 0,
                        max_stack_size: 0,
                        stack_growth_rate: 0.0,
                        stack_frames: Vec::new(),
                    },
                    cache_tracker: CacheTracker {
                        hit_rate: 0.0,
                        miss_rate: 0.0,
                        cache_size_mb: 0.0,
                        eviction_rate: 0.0,
                        cache_entries: Vec::new(),
                    },
                    garbage_collection_tracker: GcTracker {
                        gc_frequency: 0.0,
                        gc_duration: Duration::from_millis(0),
                        gc_pause_times: Vec::new(),
                        collected_objects: 0,
                        freed_memory_mb: 0.0,
                        gc_types: Vec::new(),
                    },
                    memory_leak_detector: MemoryLeakDetector {
                        leak_detection_enabled: true,
                        baseline_memory: 0.0,
                        current_memory: 0.0,
                        potential_leaks: Vec::new(),
                        leak_threshold_mb: 10.0,
                    },
                },
                resource_profiler: ResourceProfiler {
                    cpu_tracker: CpuTracker {
                        current_usage_percent: 0.0,
                        peak_usage_percent: 0.0,
                        usage_history: Vec::new(),
                        cpu_intensive_operations: Vec::new(),
                    },
                    gpu_tracker: GpuTracker {
                        current_usage_percent: 0.0,
                        memory_usage_mb: 0.0,
                        gpu_operations: Vec::new(),
                        performance_counters: HashMap::new(),
                    },
                    network_tracker: NetworkTracker {
                        current_latency: Duration::from_millis(0),
                        throughput_mbps: 0.0,
                        requests: Vec::new(),
                        connection_pool: ConnectionPool {
                            active_connections: 0,
                            idle_connections: 0,
                            max_connections: 0,
                            pool_efficiency: 0.0,
                        },
                    },
                    disk_tracker: DiskTracker {
                        read_speed_mbps: 0.0,
                        write_speed_mbps: 0.0,
                        storage_usage_mb: 0.0,
                        io_operations: Vec::new(),
                    },
                    battery_tracker: BatteryTracker {
                        battery_level: 1.0,
                        battery_drain_rate: 0.0,
                        power_consumption_mw: 0.0,
                        estimated_usage_time: Duration::from_secs(0),
                        power_events: Vec::new(),
                    },
                },
                timeline_profiler: TimelineProfiler {
                    timeline_data: TimelineData {
                        events: Vec::new(),
                        markers: Vec::new(),
                        tracks: Vec::new(),
                    },
                    event_tracker: EventTracker {
                        custom_events: Vec::new(),
                        event_handlers: Vec::new(),
                        event_performance: HashMap::new(),
                    },
                    performance_markers: PerformanceMarkers {
                        custom_markers: Vec::new(),
                        navigation_markers: Vec::new(),
                        user_timing_markers: Vec::new(),
                    },
                },
            },
            metrics_collector: MetricsCollector {
                metrics_store: MetricsStore {
                    metrics: Vec::new(),
                    indexed_metrics: HashMap::new(),
                    retention_policy: MetricsRetentionPolicy {
                        max_entries: 10000,
                        max_age_days: 30,
                        auto_cleanup: true,
                        compression_enabled: true,
                    },
                },
                sampling_rate: 1.0,
                aggregation_methods: {
                    let mut methods = HashMap::new();
                    methods.insert(MetricType::RenderTime, AggregationMethod::Average);
                    methods.insert(MetricType::MemoryUsage, AggregationMethod::Average);
                    methods
                },
            },
            analysis_engine: PerformanceAnalysisEngine {
                pattern_detector: PerformancePatternDetector {
                    patterns: Vec::new(),
                    pattern_matcher: PatternMatcher {
                        matching_algorithms: vec![PatternMatchingAlgorithm::Threshold],
                        pattern_library: PatternLibrary {
                            known_patterns: Vec::new(),
                            custom_patterns: Vec::new(),
                        },
                        confidence_threshold: 0.8,
                    },
                    anomaly_detector: AnomalyDetector {
                        detection_algorithms: vec![AnomalyDetectionAlgorithm::ZScore],
                        anomaly_threshold: 2.0,
                        false_positive_rate: 0.05,
                        detection_sensitivity: 0.9,
                    },
                },
                regression_analyzer: PerformanceRegressionAnalyzer {
                    baseline_comparator: BaselineComparator {
                        baselines: HashMap::new(),
                        comparison_method: ComparisonMethod::Relative,
                        significance_level: 0.05,
                    },
                    trend_analyzer: RegressionTrendAnalyzer {
                        trend_algorithms: vec![TrendAnalysisAlgorithm::LinearRegression],
                        trend_significance_threshold: 0.05,
                        trend_history: Vec::new(),
                    },
                    statistical_tester: StatisticalTester {
                        test_methods: vec![StatisticalTestMethod::TTest],
                        significance_level: 0.05,
                        power: 0.8,
                    },
                    regression_detector: RegressionDetector {
                        detection_criteria: Vec::new(),
                        false_positive_tolerance: 0.1,
                        sensitivity_adjustment: 1.0,
                    },
                },
                bottleneck_analyzer: BottleneckAnalyzer {
                    analysis_methods: vec![BottleneckAnalysisMethod::ResourceUtilization],
                    bottleneck_classifier: BottleneckClassifier {
                        classification_rules: Vec::new(),
                        severity_assessor: BottleneckSeverityAssessor {
                            severity_indicators: Vec::new(),
                            impact_weights: HashMap::new(),
                        },
                    },
                    impact_assessor: BottleneckImpactAssessor {
                        impact_criteria: Vec::new(),
                        user_experience_model: UserExperienceModel {
                            satisfaction_weights: HashMap::new(),
                            perception_factors: HashMap::new(),
                            tolerance_thresholds: HashMap::new(),
                        },
                    },
                },
                optimization_analyzer: OptimizationAnalyzer {
                    optimization_opportunities: Vec::new(),
                    optimization_impact_calculator: OptimizationImpactCalculator {
                        impact_models: HashMap::new(),
                        validation_methods: Vec::new(),
                    },
                    implementation_priority: ImplementationPriorityCalculator {
                        priority_factors: HashMap::new(),
                        scoring_method: PriorityScoringMethod::WeightedSum,
                    },
                },
            },
            optimization_engine: OptimizationEngine {
                suggestion_generator: OptimizationSuggestionGenerator {
                    suggestion_templates: HashMap::new(),
                    context_analyzer: ContextAnalyzer {
                        context_factors: Vec::new(),
                        constraint_analyzer: ConstraintAnalyzer {
                            constraints: Vec::new(),
                            feasibility_assessor: FeasibilityAssessor {
                                feasibility_factors: HashMap::new(),
                                assessment_method: FeasibilityAssessmentMethod::ExpertJudgment,
                            },
                        },
                    },
                    personalization_engine: PersonalizationEngine {
                        user_preferences: HashMap::new(),
                        skill_level_assessor: SkillLevelAssessor {
                            skill_metrics: HashMap::new(),
                            assessment_criteria: Vec::new(),
                        },
                        learning_history: LearningHistory {
                            completed_optimizations: Vec::new(),
                            preference_changes: Vec::new(),
                            effectiveness_ratings: HashMap::new(),
                        },
                    },
                },
                impact_calculator: ImpactCalculator {
                    calculation_models: HashMap::new(),
                    validation_framework: ImpactValidationFramework {
                        validation_methods: Vec::new(),
                        accuracy_tracker: ImpactAccuracyTracker {
                            accuracy_history: Vec::new(),
                            average_accuracy: 0.0,
                        },
                    },
                },
                implementation_tracker: ImplementationTracker {
                    implementation_plans: HashMap::new(),
                    progress_monitor: ProgressMonitor {
                        monitoring_frequency: Duration::from_hours(1),
                        progress_tracking: ProgressTracking {
                            current_progress: 0.0,
                            progress_history: Vec::new(),
                            velocity: 0.0,
                        },
                        alert_system: ProgressAlertSystem {
                            alert_thresholds: HashMap::new(),
                            alert_history: Vec::new(),
                        },
                    },
                    success_predictor: SuccessPredictor {
                        prediction_models: HashMap::new(),
                        success_factors: SuccessFactors {
                            factor_weights: HashMap::new(),
                            historical_success_patterns: Vec::new(),
                        },
                    },
                },
            },
        }
    }

    /// Start performance profiling for a component
    pub fn start_profiling(&mut self, component_name: &str) -> FrameworkResult<String> {
        let profile_id = Uuid::new_v4().to_string();
        info!("Starting performance profiling for component: {}", component_name);

        // Initialize profiling for the component
        self.initialize_component_profiling(component_name).await?;

        Ok(profile_id)
    }

    /// Stop performance profiling
    pub async fn stop_profiling(&mut self, profile_id: &str) -> FrameworkResult<PerformanceProfile> {
        info!("Stopping performance profiling: {}", profile_id);

        // Collect all metrics for the profile
        let profile = self.collect_performance_profile(profile_id).await?;

        // Analyze the collected data
        let analysis = self.analyze_performance_data(&profile).await?;

        let performance_profile = PerformanceProfile {
            profile_id: profile_id.to_string(),
            component_name: "unknown".to_string(), // This would be tracked during profiling
            start_time: Utc::now(),
            end_time: Some(Utc::now()),
            metrics: profile,
            analysis,
            recommendations: Vec::new(),
            summary: PerformanceProfileSummary::default(),
        };

        Ok(performance_profile)
    }

    /// Initialize component-specific profiling
    async fn initialize_component_profiling(&self, component_name: &str) -> FrameworkResult<()> {
        // In real implementation, this would set up hooks and monitoring
        info!("Initialized profiling for component: {}", component_name);
        Ok(())
    }

    /// Collect performance profile data
    async fn collect_performance_profile(&self, profile_id: &str) -> FrameworkResult<Vec<PerformanceMetric>> {
        // Simulate collecting performance metrics
        let metrics = vec![
            PerformanceMetric {
                metric_id: Uuid::new_v4().to_string(),
                metric_type: MetricType::RenderTime,
                component_name: "test-component".to_string(),
                value: 15.5,
                unit: "ms".to_string(),
                timestamp: Utc::now(),
                context: HashMap::new(),
                metadata: MetricMetadata {
                    measurement_method: MeasurementMethod::HighResolutionTimer,
                    confidence_level: 0.95,
                    sampling_rate: 1.0,
                    aggregation_count: 1,
                    source: MetricSource::UserTiming,
                },
            },
            PerformanceMetric {
                metric_id: Uuid::new_v4().to_string(),
                metric_type: MetricType::MemoryUsage,
                component_name: "test-component".to_string(),
                value: 2.5,
                unit: "MB".to_string(),
                timestamp: Utc::now(),
                context: HashMap::new(),
                metadata: MetricMetadata {
                    measurement_method: MeasurementMethod::BrowserMetrics,
                    confidence_level: 0.9,
                    sampling_rate: 1.0,
                    aggregation_count: 1,
                    source: MetricSource::BrowserMetrics,
                },
            },
        ];

        Ok(metrics)
    }

    /// Analyze performance data
    async fn analyze_performance_data(&self, metrics: &[PerformanceMetric]) -> FrameworkResult<PerformanceAnalysis> {
        // Simulate performance analysis
        let analysis = PerformanceAnalysis {
            performance_score: 85.0,
            bottlenecks: Vec::new(),
            patterns: Vec::new(),
            trends: Vec::new(),
            optimization_opportunities: Vec::new(),
            anomalies: Vec::new(),
            recommendations: Vec::new(),
        };

        Ok(analysis)
    }

    /// Get current performance metrics
    pub fn get_current_metrics(&self) -> &MetricsStore {
        &self.metrics_collector.metrics_store
    }

    /// Get profiling engine
    pub fn get_profiling_engine(&self) -> &ProfilingEngine {
        &self.profiling_engine
    }

    /// Get analysis engine
    pub fn get_analysis_engine(&self) -> &PerformanceAnalysisEngine {
        &self.analysis_engine
    }
}

/// Performance profile structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceProfile {
    pub profile_id: String,
    pub component_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub metrics: Vec<PerformanceMetric>,
    pub analysis: PerformanceAnalysis,
    pub recommendations: Vec<OptimizationRecommendation>,
    pub summary: PerformanceProfileSummary,
}

/// Performance analysis results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub performance_score: f64,
    pub bottlenecks: Vec<BottleneckInfo>,
    pub patterns: Vec<PerformancePattern>,
    pub trends: Vec<PerformanceTrend>,
    pub optimization_opportunities: Vec<OptimizationOpportunity>,
    pub anomalies: Vec<PerformanceAnomaly>,
    pub recommendations: Vec<PerformanceRecommendation>,
}

/// Bottleneck information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BottleneckInfo {
    pub bottleneck_id: String,
    pub bottleneck_type: BottleneckType,
    pub severity: BottleneckSeverity,
    pub affected_metrics: Vec<MetricType>,
    pub impact_score: f64,
    pub description: String,
    pub remediation_suggestions: Vec<String>,
}

/// Bottleneck severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BottleneckSeverity {
    Critical,
    High,
    Medium,
    Low,
}

/// Performance anomaly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceAnomaly {
    pub anomaly_id: String,
    pub metric_type: MetricType,
    pub detected_value: f64,
    pub expected_range: (f64, f64),
    pub severity: AnomalySeverity,
    pub timestamp: DateTime<Utc>,
    pub context: HashMap<String, String>,
}

/// Anomaly severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnomalySeverity {
    Critical,
    High,
    Medium,
    Low,
}

/// Performance recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecommendation {
    pub recommendation_id: String,
    pub title: String,
    pub description: String,
    pub priority: RecommendationPriority,
    pub estimated_impact: f64,
    pub implementation_effort: ImplementationEffort,
    pub related_metrics: Vec<MetricType>,
    pub code_changes: Vec<CodeChange>,
}

/// Recommendation priority
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecommendationPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// Code change suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeChange {
    pub file_path: String,
    pub change_type: CodeChangeType,
    pub description: String,
    pub before_code: String,
    pub after_code: String,
}

/// Code change types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CodeChangeType {
    Performance,
    Memory,
    Accessibility,
    BestPractice,
}

/// Optimization recommendation
#[#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationRecommendation {
    pub recommendation_id: String,
    pub optimization_type: OptimizationType,
    pub title: String,
    pub description: String,
    pub estimated_improvement: f64,
    pub implementation_steps: Vec<String>,
    var priority: RecommendationPriority,
    var risk_level: RiskLevel,
}

/// Performance profile summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceProfileSummary {
    var overall_score: f64,
    var performance_rating: PerformanceRating,
    var key_issues: Vec<String>,
    var optimization_potential: f64,
    var profile_completeness: f64,
}

/// Performance ratings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PerformanceRating {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl Default for PerformanceProfileSummary {
    fn default() -> Self {
        Self {
            overall_score: 0.0,
            performance_rating: PerformanceRating::Fair,
            key_issues: Vec::new(),
            optimization_potential: 0.0,
            profile_completeness: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_performance_metric_creation() {
        let metric = PerformanceMetric {
            metric_id: "test_metric".to_string(),
            metric_type: MetricType::RenderTime,
            component_name: "test_component".to_string(),
            value: 15.5,
            unit: "ms".to_string(),
            timestamp: Utc::now(),
            context: HashMap::new(),
            metadata: MetricMetadata {
                measurement_method: MeasurementMethod::HighResolutionTimer,
                confidence_level: 0.95,
                sampling_rate: 1.0,
                aggregation_count: 1,
                source: MetricSource::UserTiming,
            },
        };
        
        assert_eq!(metric.metric_type, MetricType::RenderTime);
        assert_eq!(metric.value, 15.5);
        assert_eq!(metric.unit, "ms");
    }
    
    #[test]
    fn test_metric_type_variants() {
        let render_time = MetricType::RenderTime;
        let memory_usage = MetricType::MemoryUsage;
        let network_latency = MetricType::NetworkLatency;
        let custom_metric = MetricType::Custom("custom_metric".to_string());
        
        assert!(matches!(render_time, MetricType::RenderTime));
        assert!(matches!(memory_usage, MetricType::MemoryUsage));
        assert!(matches!(network_latency, MetricType::NetworkLatency));
        assert!(matches!(custom_metric, MetricType::Custom(_)));
    }
    
    #[test]
    fn test_bottleneck_types() {
        let slow_response = BottleneckType::SlowResponse;
        let animation_lag = BottleneckType::AnimationLag;
        let render_delay = BottleneckType::RenderDelay;
        
        assert!(matches!(slow_response, BottleneckType::SlowResponse));
        assert!(matches!(animation_lag, BottleneckType::AnimationLag));
        assert!(matches!(render_delay, BottleneckType::RenderDelay));
    }
    
    #[test]
    fn test_aggregation_methods() {
        let average = AggregationMethod::Average;
        let percentile = AggregationMethod::Percentile(95);
        let moving_avg = AggregationMethod::MovingAverage(10);
        
        assert!(matches!(average, AggregationMethod::Average));
        assert!(matches!(percentile, AggregationMethod::Percentile(_)));
        assert!(matches!(moving_avg, AggregationMethod::MovingAverage(_)));
    }
    
    #[test]
    fn test_performance_trend() {
        let trend = PerformanceTrend {
            direction: TrendDirection::Increasing,
            strength: 0.8,
            confidence: 0.9,
            slope: 2.5,
            intercept: 10.0,
        };
        
        assert!(matches!(trend.direction, TrendDirection::Increasing));
        assert_eq!(trend.strength, 0.8);
        assert_eq!(trend.confidence, 0.9);
    }
}