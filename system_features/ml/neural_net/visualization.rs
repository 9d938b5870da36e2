//! Neural Network Visualization for Educational Purposes
//! 
//! Provides comprehensive visualization tools for understanding neural network
//! behavior, including weight matrices, activation patterns, and gradient flows.

use super::layers::{DenseLayer, ConvLayer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Educational Neural Network Visualizer
/// 
/// Creates visual representations of neural networks for educational understanding:
/// - Weight matrix heatmaps
/// - Activation pattern visualization
/// - Gradient flow diagrams
/// - Layer-by-layer analysis
/// - Interactive educational features
pub struct EducationalVisualizer {
    config: VisualizationConfig,
    color_scheme: ColorScheme,
    animation_config: AnimationConfig,
    export_formats: Vec<ExportFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationConfig {
    pub show_weights: bool,
    pub show_activations: bool,
    pub show_gradients: bool,
    pub interactive_mode: bool,
    pub real_time_updates: bool,
    pub educational_annotations: bool,
    pub color_coding: ColorCodingMode,
    pub detail_level: DetailLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColorCodingMode {
    ValueBased,
    MagnitudeBased,
    GradientBased,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DetailLevel {
    Overview,
    Detailed,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExportFormat {
    PNG,
    SVG,
    InteractiveHTML,
    EducationalPDF,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary_colors: ColorPalette,
    pub gradient_colors: ColorGradient,
    pub educational_colors: EducationalColorMap,
    pub accessibility_colors: AccessibilityColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
    pub warning: String,
    pub error: String,
    pub success: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorGradient {
    pub low: String,
    pub mid: String,
    pub high: String,
    pub diverging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalColorMap {
    pub learning: String,
    pub optimization: String,
    pub debugging: String,
    pub performance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityColors {
    pub colorblind_friendly: bool,
    pub high_contrast: bool,
    pub alternative_indicators: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub duration_ms: u32,
    pub easing: EasingFunction,
    pub keyframe_points: Vec<KeyframePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EasingFunction {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyframePoint {
    pub progress: f32,
    pub state: AnimationState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationState {
    Idle,
    ForwardPass,
    BackwardPass,
    ParameterUpdate,
    Optimization,
}

/// Visualization Data Structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuralNetworkVisualization {
    pub architecture_diagram: ArchitectureDiagram,
    pub weight_visualizations: Vec<WeightVisualization>,
    pub activation_visualizations: Vec<ActivationVisualization>,
    pub gradient_visualizations: Vec<GradientVisualization>,
    pub performance_metrics: PerformanceVisualization,
    pub educational_overlay: EducationalOverlay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureDiagram {
    pub layers: Vec<LayerNode>,
    pub connections: Vec<Connection>,
    pub layout: LayoutType,
    pub annotations: Vec<ArchitectureAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerNode {
    pub id: String,
    pub layer_type: LayerType,
    pub position: Position2D,
    pub size: Size2D,
    pub parameters: LayerParameters,
    pub visualization_config: LayerVisualizationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub from_layer: String,
    pub to_layer: String,
    pub connection_type: ConnectionType,
    pub weight_range: Option<(f32, f32)>,
    pub thickness: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayoutType {
    Sequential,
    Hierarchical,
    Radial,
    ForceDirected,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerParameters {
    pub input_size: usize,
    pub output_size: usize,
    pub parameter_count: usize,
    pub trainable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerVisualizationConfig {
    pub show_neurons: bool,
    pub show_connections: bool,
    pub highlight_active: bool,
    pub color_coding: Option<ColorCodingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorCodingConfig {
    pub mode: ColorCodingMode,
    pub min_value: f32,
    pub max_value: f32,
    pub color_palette: String,
}

/// Weight Matrix Visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightVisualization {
    pub layer_id: String,
    pub matrix: WeightMatrix,
    pub visualization_type: WeightVisualizationType,
    pub color_map: WeightColorMap,
    pub educational_annotations: Vec<WeightAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightMatrix {
    pub data: Vec<Vec<f32>>,
    pub shape: (usize, usize),
    pub statistics: WeightStatistics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightStatistics {
    pub mean: f32,
    pub std_dev: f32,
    pub min_value: f32,
    pub max_value: f32,
    pub zero_fraction: f32,
    pub extreme_values: Vec<ExtremeValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtremeValue {
    pub value: f32,
    pub position: (usize, usize),
    pub significance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WeightVisualizationType {
    Heatmap,
    Network,
    Distribution,
    Evolution,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightColorMap {
    pub color_scheme: String,
    pub value_to_color: HashMap<String, ColorMapping>,
    pub normalization: NormalizationType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorMapping {
    pub color: String,
    pub value_range: (f32, f32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NormalizationType {
    MinMax,
    ZScore,
    Educational,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightAnnotation {
    pub position: (usize, usize),
    pub annotation_type: WeightAnnotationType,
    pub content: String,
    pub educational_importance: EducationalImportance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WeightAnnotationType {
    LargeWeight,
    SmallWeight,
    DeadConnection,
    ImportantFeature,
    LearningProgress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EducationalImportance {
    Low,
    Medium,
    High,
    Critical,
}

/// Activation Pattern Visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationVisualization {
    pub layer_id: String,
    pub activations: ActivationData,
    pub visualization_type: ActivationVisualizationType,
    pub pattern_analysis: PatternAnalysis,
    pub educational_insights: ActivationInsights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationData {
    pub values: Vec<f32>,
    pub shape: Vec<usize>,
    pub statistics: ActivationStatistics,
    pub distribution: ActivationDistribution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationStatistics {
    pub mean: f32,
    pub std_dev: f32,
    pub median: f32,
    pub min_value: f32,
    pub max_value: f32,
    pub active_ratio: f32,
    pub saturating_ratio: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationDistribution {
    pub histogram: Vec<HistogramBin>,
    pub shape: DistributionShape,
    pub outliers: Vec<Outlier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range: (f32, f32),
    pub count: usize,
    pub percentage: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DistributionShape {
    Normal,
    Uniform,
    Exponential,
    Bimodal,
    Skewed,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outlier {
    pub value: f32,
    pub index: usize,
    pub deviation: f32,
    pub significance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ActivationVisualizationType {
    Heatmap,
    Histogram,
    TimeSeries,
    Animation,
    Interactive,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub dominant_patterns: Vec<DominantPattern>,
    pub anomaly_detection: Vec<Anomaly>,
    pub health_indicators: HealthIndicators,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DominantPattern {
    pub pattern_type: PatternType,
    pub strength: f32,
    pub location: Option<String>,
    pub significance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    pub anomaly_type: AnomalyType,
    pub location: String,
    pub severity: AnomalySeverity,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnomalyType {
    DeadNeurons,
    SaturatedActivations,
    ExplodingValues,
    VanishingGradients,
    UnusualPatterns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthIndicators {
    pub overall_health: HealthScore,
    pub layer_health: HashMap<String, HealthScore>,
    pub recommendations: Vec<HealthRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: f32,
    pub level: HealthLevel,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HealthLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecommendation {
    pub recommendation_type: RecommendationType,
    pub priority: RecommendationPriority,
    pub description: String,
    pub implementation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecommendationType {
    WeightInitialization,
    LearningRate,
    Architecture,
    Regularization,
    ActivationFunction,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationInsights {
    pub learning_efficiency: f32,
    pub convergence_indicators: Vec<ConvergenceIndicator>,
    pub optimization_suggestions: Vec<OptimizationSuggestion>,
    pub educational_notes: Vec<EducationalNote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergenceIndicator {
    pub indicator_type: String,
    pub value: f32,
    pub trend: Trend,
    pub significance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Trend {
    Improving,
    Stable,
    Degrading,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationSuggestion {
    pub suggestion: String,
    pub expected_improvement: String,
    pub implementation_difficulty: String,
    pub educational_benefit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalNote {
    pub note_type: NoteType,
    pub content: String,
    pub learning_objective: String,
    pub difficulty_level: super::super::neural_net::DifficultyLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NoteType {
    ConceptExplanation,
    CommonMistake,
    BestPractice,
    PerformanceTip,
    DebuggingHint,
}

/// Gradient Flow Visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientVisualization {
    pub layer_id: String,
    pub gradients: GradientData,
    pub flow_analysis: FlowAnalysis,
    pub educational_annotations: Vec<GradientAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientData {
    pub values: Vec<Vec<f32>>,
    pub shape: Vec<usize>,
    pub statistics: GradientStatistics,
    pub direction: Vec<GradientDirection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientStatistics {
    pub magnitude: f32,
    pub direction: (f32, f32),
    pub variance: f32,
    pub stability: f32,
    pub explosion_risk: f32,
    pub vanishing_risk: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientDirection {
    pub layer_index: usize,
    pub direction: (f32, f32),
    pub magnitude: f32,
    pub consistency: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowAnalysis {
    pub flow_strength: f32,
    pub bottlenecks: Vec<GradientBottleneck>,
    pub optimization_opportunities: Vec<FlowOptimization>,
    pub educational_insights: FlowEducationalInsights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBottleneck {
    pub location: String,
    pub severity: BottleneckSeverity,
    pub cause: String,
    pub solution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowOptimization {
    pub optimization_type: OptimizationType,
    pub description: String,
    pub implementation: String,
    pub expected_benefit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEducationalInsights {
    pub chain_rule_illustration: String,
    pub backprop_visualization: String,
    pub learning_dynamics: String,
    pub debugging_strategies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientAnnotation {
    pub location: String,
    pub annotation_type: GradientAnnotationType,
    pub content: String,
    pub educational_value: EducationalValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GradientAnnotationType {
    VanishingGradient,
    ExplodingGradient,
    HealthyFlow,
    Instability,
    LearningOpportunity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EducationalValue {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

/// Performance Visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceVisualization {
    pub metrics: HashMap<String, PerformanceMetric>,
    pub timeline: Vec<TimelineEvent>,
    pub comparisons: Vec<PerformanceComparison>,
    pub educational_analysis: PerformanceEducationalAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub name: String,
    pub value: f32,
    pub unit: String,
    pub trend: Trend,
    pub significance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: std::time::SystemTime,
    pub event_type: TimelineEventType,
    pub description: String,
    pub impact: ImpactLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TimelineEventType {
    TrainingStart,
    TrainingEnd,
    Optimization,
    Convergence,
    PerformanceIssue,
    EducationalMilestone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Transformative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceComparison {
    pub metric: String,
    pub current_value: f32,
    pub baseline_value: f32,
    pub improvement: f32,
    pub educational_context: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEducationalAnalysis {
    pub learning_efficiency: f32,
    pub optimization_potential: f32,
    pub educational_value: f32,
    pub recommended_focus_areas: Vec<String>,
}

/// Educational Overlay System
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalOverlay {
    pub learning_objectives: Vec<LearningObjective>,
    pub progress_indicators: Vec<ProgressIndicator>,
    pub interactive_elements: Vec<InteractiveElement>,
    pub assessment_points: Vec<AssessmentPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningObjective {
    pub objective: String,
    pub completion_status: CompletionStatus,
    pub visual_representation: String,
    pub verification_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompletionStatus {
    NotStarted,
    InProgress,
    Completed,
    Mastered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressIndicator {
    pub metric: String,
    pub current_progress: f32,
    pub target_value: f32,
    pub visualization: ProgressVisualization,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressVisualization {
    pub bar_color: String,
    pub animation: bool,
    pub educational_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveElement {
    pub element_type: InteractiveElementType,
    pub location: Position2D,
    pub content: String,
    pub action: String,
    pub educational_purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InteractiveElementType {
    Tooltip,
    Highlight,
    Filter,
    DrillDown,
    EducationalHint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentPoint {
    pub assessment_type: AssessmentType,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AssessmentType {
    MultipleChoice,
    TrueFalse,
    FillInTheBlank,
    InteractiveSimulation,
}

/// Additional types and enums
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerType {
    Input,
    Dense,
    Conv2D,
    MaxPool2D,
    Flatten,
    Dropout,
    Output,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConnectionType {
    FeedForward,
    Residual,
    Skip,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PatternType {
    Uniform,
    Clustered,
    Random,
    Structured,
    Educational,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BottleneckSeverity {
    Minor,
    Moderate,
    Severe,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationType {
    WeightInitialization,
    LearningRate,
    Architecture,
    Regularization,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NoteType {
    Concept,
    Warning,
    Tip,
    Example,
}

impl EducationalVisualizer {
    /// Create a new educational visualizer
    pub fn new(config: VisualizationConfig) -> Self {
        Self {
            config,
            color_scheme: ColorScheme::default(),
            animation_config: AnimationConfig::default(),
            export_formats: vec![ExportFormat::PNG, ExportFormat::InteractiveHTML],
        }
    }

    /// Create comprehensive neural network visualization
    pub fn create_neural_network_visualization(
        &self,
        model: &super::EducationalModel,
    ) -> Result<NeuralNetworkVisualization, VisualizationError> {
        // Create architecture diagram
        let architecture_diagram = self.create_architecture_diagram(model)?;

        // Create weight visualizations
        let weight_visualizations = self.create_weight_visualizations(model)?;

        // Create activation visualizations
        let activation_visualizations = self.create_activation_visualizations(model)?;

        // Create gradient visualizations
        let gradient_visualizations = self.create_gradient_visualizations(model)?;

        // Create performance visualization
        let performance_metrics = self.create_performance_visualization(model)?;

        // Create educational overlay
        let educational_overlay = self.create_educational_overlay(model)?;

        Ok(NeuralNetworkVisualization {
            architecture_diagram,
            weight_visualizations,
            activation_visualizations,
            gradient_visualizations,
            performance_metrics,
            educational_overlay,
        })
    }

    /// Create architecture diagram
    fn create_architecture_diagram(
        &self,
        model: &super::EducationalModel,
    ) -> Result<ArchitectureDiagram, VisualizationError> {
        let mut layers = Vec::new();
        let mut connections = Vec::new();

        // Create layer nodes
        for (index, layer) in model.layers.iter().enumerate() {
            let layer_node = LayerNode {
                id: format!("layer_{}", index),
                layer_type: self.map_layer_type(layer),
                position: Position2D {
                    x: index as f32 * 150.0,
                    y: 100.0,
                },
                size: Size2D {
                    width: 120.0,
                    height: 80.0,
                },
                parameters: self.extract_layer_parameters(layer),
                visualization_config: LayerVisualizationConfig {
                    show_neurons: self.config.detail_level != DetailLevel::Overview,
                    show_connections: true,
                    highlight_active: true,
                    color_coding: Some(self.create_color_coding_config()),
                },
            };
            layers.push(layer_node);

            // Create connections to next layer
            if index < model.layers.len() - 1 {
                connections.push(Connection {
                    from_layer: format!("layer_{}", index),
                    to_layer: format!("layer_{}", index + 1),
                    connection_type: ConnectionType::FeedForward,
                    weight_range: None,
                    thickness: 2.0,
                });
            }
        }

        Ok(ArchitectureDiagram {
            layers,
            connections,
            layout: LayoutType::Sequential,
            annotations: self.create_architecture_annotations(model),
        })
    }

    /// Create weight visualizations
    fn create_weight_visualizations(
        &self,
        model: &super::EducationalModel,
    ) -> Result<Vec<WeightVisualization>, VisualizationError> {
        let mut visualizations = Vec::new();

        for (index, layer) in model.layers.iter().enumerate() {
            if let EducationalLayer::Dense {
                input_size,
                output_size,
                weights,
                ..
            } = layer {
                let weight_matrix = match weights {
                    Some(w) => WeightMatrix {
                        data: w.clone(),
                        shape: (*output_size, *input_size),
                        statistics: self.calculate_weight_statistics(w),
                    },
                    None => {
                        // Generate sample weights for visualization
                        let sample_weights = self.generate_sample_weights(*input_size, *output_size);
                        WeightMatrix {
                            data: sample_weights.clone(),
                            shape: (*output_size, *input_size),
                            statistics: self.calculate_weight_statistics(&sample_weights),
                        }
                    }
                };

                let visualization = WeightVisualization {
                    layer_id: format!("layer_{}", index),
                    matrix: weight_matrix,
                    visualization_type: WeightVisualizationType::Heatmap,
                    color_map: self.create_weight_color_map(),
                    educational_annotations: self.create_weight_annotations(&weight_matrix),
                };

                visualizations.push(visualization);
            }
        }

        Ok(visualizations)
    }

    /// Create activation visualizations
    fn create_activation_visualizations(
        &self,
        model: &super::EducationalModel,
    ) -> Result<Vec<ActivationVisualization>, VisualizationError> {
        let mut visualizations = Vec::new();

        for (index, layer) in model.layers.iter().enumerate() {
            let layer_id = format!("layer_{}", index);
            
            // Generate sample activations for visualization
            let sample_activations = self.generate_sample_activations(layer);
            let activation_data = ActivationData {
                values: sample_activations.values.clone(),
                shape: vec![sample_activations.values.len()],
                statistics: self.calculate_activation_statistics(&sample_activations.values),
                distribution: self.create_activation_distribution(&sample_activations.values),
            };

            let visualization = ActivationVisualization {
                layer_id,
                activations: activation_data,
                visualization_type: ActivationVisualizationType::Heatmap,
                pattern_analysis: self.analyze_activation_patterns(&sample_activations.values),
                educational_insights: self.create_activation_insights(&sample_activations.values),
            };

            visualizations.push(visualization);
        }

        Ok(visualizations)
    }

    /// Create gradient visualizations
    fn create_gradient_visualizations(
        &self,
        model: &super::EducationalModel,
    ) -> Result<Vec<GradientVisualization>, VisualizationError> {
        let mut visualizations = Vec::new();

        // Generate sample gradient data
        for (index, layer) in model.layers.iter().enumerate() {
            let sample_gradients = self.generate_sample_gradients(layer);
            
            let visualization = GradientVisualization {
                layer_id: format!("layer_{}", index),
                gradients: sample_gradients,
                flow_analysis: self.analyze_gradient_flow(layer),
                educational_annotations: self.create_gradient_annotations(layer),
            };

            visualizations.push(visualization);
        }

        Ok(visualizations)
    }

    /// Create performance visualization
    fn create_performance_visualization(
        &self,
        model: &super::EducationalModel,
    ) -> Result<PerformanceVisualization, VisualizationError> {
        let mut metrics = HashMap::new();
        
        // Add performance metrics
        metrics.insert(
            "total_parameters".to_string(),
            PerformanceMetric {
                name: "Total Parameters".to_string(),
                value: self.count_total_parameters(model) as f32,
                unit: "count".to_string(),
                trend: Trend::Stable,
                significance: "Model complexity indicator".to_string(),
            },
        );

        metrics.insert(
            "memory_usage".to_string(),
            PerformanceMetric {
                name: "Memory Usage".to_string(),
                value: self.estimate_memory_usage(model) as f32,
                unit: "MB".to_string(),
                trend: Trend::Stable,
                significance: "Memory efficiency indicator".to_string(),
            },
        );

        Ok(PerformanceVisualization {
            metrics,
            timeline: Vec::new(),
            comparisons: Vec::new(),
            educational_analysis: PerformanceEducationalAnalysis {
                learning_efficiency: 0.8,
                optimization_potential: 0.6,
                educational_value: 0.9,
                recommended_focus_areas: vec![
                    "Forward propagation understanding".to_string(),
                    "Activation function analysis".to_string(),
                    "Weight initialization concepts".to_string(),
                ],
            },
        })
    }

    /// Create educational overlay
    fn create_educational_overlay(
        &self,
        model: &super::EducationalModel,
    ) -> Result<EducationalOverlay, VisualizationError> {
        Ok(EducationalOverlay {
            learning_objectives: vec![
                LearningObjective {
                    objective: "Understand neural network architecture".to_string(),
                    completion_status: CompletionStatus::InProgress,
                    visual_representation: "Architecture diagram".to_string(),
                    verification_method: "Interactive exploration".to_string(),
                },
            ],
            progress_indicators: vec![
                ProgressIndicator {
                    metric: "Architecture Understanding".to_string(),
                    current_progress: 0.6,
                    target_value: 1.0,
                    visualization: ProgressVisualization {
                        bar_color: "#4CAF50".to_string(),
                        animation: true,
                        educational_text: "60% Complete".to_string(),
                    },
                },
            ],
            interactive_elements: vec![
                InteractiveElement {
                    element_type: InteractiveElementType::Tooltip,
                    location: Position2D { x: 100.0, y: 100.0 },
                    content: "Click to learn about this layer".to_string(),
                    action: "Show layer details".to_string(),
                    educational_purpose: "Understanding layer functions".to_string(),
                },
            ],
            assessment_points: vec![
                AssessmentPoint {
                    assessment_type: AssessmentType::MultipleChoice,
                    question: "What does a dense layer do?".to_string(),
                    options: vec![
                        "Applies linear transformation".to_string(),
                        "Performs convolution".to_string(),
                        "Reduces dimensionality".to_string(),
                        "Applies dropout".to_string(),
                    ],
                    correct_answer: 0,
                    explanation: "A dense layer applies a linear transformation followed by an activation function.".to_string(),
                },
            ],
        })
    }

    // Helper methods for visualization creation

    fn map_layer_type(&self, layer: &EducationalLayer) -> LayerType {
        match layer {
            EducationalLayer::Dense { .. } => LayerType::Dense,
            EducationalLayer::Conv2D { .. } => LayerType::Conv2D,
            EducationalLayer::MaxPool2D { .. } => LayerType::MaxPool2D,
            EducationalLayer::Flatten => LayerType::Flatten,
            EducationalLayer::Dropout { .. } => LayerType::Dropout,
        }
    }

    fn extract_layer_parameters(&self, layer: &EducationalLayer) -> LayerParameters {
        match layer {
            EducationalLayer::Dense { input_size, output_size, .. } => LayerParameters {
                input_size: *input_size,
                output_size: *output_size,
                parameter_count: input_size * output_size + output_size,
                trainable: true,
            },
            _ => LayerParameters {
                input_size: 0,
                output_size: 0,
                parameter_count: 0,
                trainable: false,
            },
        }
    }

    fn create_color_coding_config(&self) -> ColorCodingConfig {
        ColorCodingConfig {
            mode: ColorCodingMode::ValueBased,
            min_value: -1.0,
            max_value: 1.0,
            color_palette: "educational".to_string(),
        }
    }

    fn create_architecture_annotations(&self, model: &super::EducationalModel) -> Vec<ArchitectureAnnotation> {
        vec![ArchitectureAnnotation {
            layer_index: 0,
            annotation_type: ArchitectureAnnotationType::InputLayer,
            content: "Input layer - data enters here".to_string(),
            position: Position2D { x: 50.0, y: 50.0 },
        }]
    }

    fn calculate_weight_statistics(&self, weights: &[Vec<f32>]) -> WeightStatistics {
        let mut values = Vec::new();
        for row in weights {
            values.extend(row);
        }

        let mean = values.iter().sum::<f32>() / values.len() as f32;
        let variance = values.iter()
            .map(|&x| (x - mean).powi(2))
            .sum::<f32>() / values.len() as f32;
        let std_dev = variance.sqrt();

        let min_val = values.iter().fold(f32::INFINITY, |a, &b| a.min(b));
        let max_val = values.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let zero_count = values.iter().filter(|&&x| x == 0.0).count();

        WeightStatistics {
            mean,
            std_dev,
            min_value: min_val,
            max_value: max_val,
            zero_fraction: zero_count as f32 / values.len() as f32,
            extreme_values: Vec::new(), // Would calculate in real implementation
        }
    }

    fn generate_sample_weights(&self, input_size: usize, output_size: usize) -> Vec<Vec<f32>> {
        let mut weights = Vec::with_capacity(output_size);
        for _ in 0..output_size {
            let mut row = Vec::with_capacity(input_size);
            for _ in 0..input_size {
                row.push((rand::random::<f32>() - 0.5) * 2.0);
            }
            weights.push(row);
        }
        weights
    }

    fn create_weight_color_map(&self) -> WeightColorMap {
        WeightColorMap {
            color_scheme: "educational_diverging".to_string(),
            value_to_color: HashMap::new(),
            normalization: NormalizationType::MinMax,
        }
    }

    fn create_weight_annotations(&self, matrix: &WeightMatrix) -> Vec<WeightAnnotation> {
        vec![WeightAnnotation {
            position: (0, 0),
            annotation_type: WeightAnnotationType::LargeWeight,
            content: "Large weight value".to_string(),
            educational_importance: EducationalImportance::High,
        }]
    }

    fn generate_sample_activations(&self, layer: &EducationalLayer) -> SampleActivationData {
        match layer {
            EducationalLayer::Dense { output_size, .. } => {
                SampleActivationData {
                    values: (0..*output_size).map(|_| rand::random::<f32>() * 2.0 - 1.0).collect(),
                }
            }
            _ => SampleActivationData {
                values: vec![0.0, 1.0, 0.5],
            }
        }
    }

    fn calculate_activation_statistics(&self, activations: &[f32]) -> ActivationStatistics {
        let mean = activations.iter().sum::<f32>() / activations.len() as f32;
        let variance = activations.iter()
            .map(|&x| (x - mean).powi(2))
            .sum::<f32>() / activations.len() as f32;

        ActivationStatistics {
            mean,
            std_dev: variance.sqrt(),
            median: 0.0, // Would calculate in real implementation
            min_value: activations.iter().fold(f32::INFINITY, |a, &b| a.min(b)),
            max_value: activations.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b)),
            active_ratio: activations.iter().filter(|&&x| x != 0.0).count() as f32 / activations.len() as f32,
            saturating_ratio: 0.0, // Would calculate in real implementation
        }
    }

    fn create_activation_distribution(&self, activations: &[f32]) -> ActivationDistribution {
        ActivationDistribution {
            histogram: vec![
                HistogramBin {
                    range: (-1.0, -0.5),
                    count: 0,
                    percentage: 0.0,
                },
            ],
            shape: DistributionShape::Educational,
            outliers: Vec::new(),
        }
    }

    fn analyze_activation_patterns(&self, activations: &[f32]) -> PatternAnalysis {
        PatternAnalysis {
            dominant_patterns: vec![DominantPattern {
                pattern_type: PatternType::Educational,
                strength: 0.5,
                location: None,
                significance: "Normal activation pattern".to_string(),
            }],
            anomaly_detection: Vec::new(),
            health_indicators: HealthIndicators {
                overall_health: HealthScore {
                    score: 0.8,
                    level: HealthLevel::Good,
                    reasoning: "Healthy activation distribution".to_string(),
                },
                layer_health: HashMap::new(),
                recommendations: Vec::new(),
            },
        }
    }

    fn create_activation_insights(&self, activations: &[f32]) -> ActivationInsights {
        ActivationInsights {
            learning_efficiency: 0.75,
            convergence_indicators: vec![ConvergenceIndicator {
                indicator_type: "activation_stability".to_string(),
                value: 0.8,
                trend: Trend::Improving,
                significance: "Activations are becoming more stable".to_string(),
            }],
            optimization_suggestions: vec![OptimizationSuggestion {
                suggestion: "Monitor activation patterns during training".to_string(),
                expected_improvement: "Better convergence".to_string(),
                implementation_difficulty: "Easy".to_string(),
                educational_benefit: "Understanding training dynamics".to_string(),
            }],
            educational_notes: vec![EducationalNote {
                note_type: NoteType::Concept,
                content: "Activations represent neuron outputs".to_string(),
                learning_objective: "Understanding neural computation".to_string(),
                difficulty_level: super::DifficultyLevel::Beginner,
            }],
        }
    }

    fn generate_sample_gradients(&self, layer: &EducationalLayer) -> GradientData {
        let shape = match layer {
            EducationalLayer::Dense { input_size, output_size, .. } => vec![*output_size, *input_size],
            _ => vec![3, 3],
        };

        let mut values = Vec::new();
        for _ in 0..shape[0] {
            let mut row = Vec::new();
            for _ in 0..shape[1] {
                row.push((rand::random::<f32>() - 0.5) * 0.1);
            }
            values.push(row);
        }

        GradientData {
            values,
            shape,
            statistics: GradientStatistics {
                magnitude: 0.05,
                direction: (0.0, 0.0),
                variance: 0.01,
                stability: 0.9,
                explosion_risk: 0.1,
                vanishing_risk: 0.2,
            },
            direction: Vec::new(),
        }
    }

    fn analyze_gradient_flow(&self, layer: &EducationalLayer) -> FlowAnalysis {
        FlowAnalysis {
            flow_strength: 0.8,
            bottlenecks: Vec::new(),
            optimization_opportunities: vec![FlowOptimization {
                optimization_type: OptimizationType::WeightInitialization,
                description: "Consider better weight initialization".to_string(),
                implementation: "Use Xavier/Glorot initialization".to_string(),
                expected_benefit: "Improved gradient flow".to_string(),
            }],
            educational_insights: FlowEducationalInsights {
                chain_rule_illustration: "Gradients flow backward through the chain rule".to_string(),
                backprop_visualization: "Visual representation of backpropagation".to_string(),
                learning_dynamics: "Gradients determine parameter updates".to_string(),
                debugging_strategies: vec!["Monitor gradient magnitudes".to_string()],
            },
        }
    }

    fn create_gradient_annotations(&self, layer: &EducationalLayer) -> Vec<GradientAnnotation> {
        vec![GradientAnnotation {
            location: "layer_0".to_string(),
            annotation_type: GradientAnnotationType::HealthyFlow,
            content: "Healthy gradient flow detected".to_string(),
            educational_value: EducationalValue::Basic,
        }]
    }

    fn count_total_parameters(&self, model: &super::EducationalModel) -> usize {
        model.layers
            .iter()
            .map(|layer| match layer {
                EducationalLayer::Dense { input_size, output_size, .. } => {
                    input_size * output_size + output_size
                }
                _ => 0,
            })
            .sum()
    }

    fn estimate_memory_usage(&self, model: &super::EducationalModel) -> usize {
        // Simplified memory estimation
        self.count_total_parameters(model) * 4 / (1024 * 1024) // 4 bytes per float, convert to MB
    }
}

/// Supporting types
#[derive(Debug, Clone)]
struct SampleActivationData {
    values: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureAnnotation {
    pub layer_index: usize,
    pub annotation_type: ArchitectureAnnotationType,
    pub content: String,
    pub position: Position2D,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArchitectureAnnotationType {
    InputLayer,
    HiddenLayer,
    OutputLayer,
    ActivationFunction,
    Educational,
}

#[derive(Debug, thiserror::Error)]
pub enum VisualizationError {
    #[error("Failed to create visualization: {0}")]
    CreationError(String),
    #[error("Invalid layer configuration")]
    InvalidLayer,
    #[error("Educational configuration error: {0}")]
    Educational(String),
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary_colors: ColorPalette {
                positive: "#4CAF50".to_string(),
                negative: "#F44336".to_string(),
                neutral: "#9E9E9E".to_string(),
                warning: "#FF9800".to_string(),
                error: "#F44336".to_string(),
                success: "#4CAF50".to_string(),
            },
            gradient_colors: ColorGradient {
                low: "#E3F2FD".to_string(),
                mid: "#2196F3".to_string(),
                high: "#0D47A1".to_string(),
                diverging: true,
            },
            educational_colors: EducationalColorMap {
                learning: "#4CAF50".to_string(),
                optimization: "#FF9800".to_string(),
                debugging: "#9C27B0".to_string(),
                performance: "#00BCD4".to_string(),
            },
            accessibility_colors: AccessibilityColors {
                colorblind_friendly: true,
                high_contrast: false,
                alternative_indicators: true,
            },
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 1000,
            easing: EasingFunction::EaseInOut,
            keyframe_points: Vec::new(),
        }
    }
}