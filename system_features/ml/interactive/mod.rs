//! Interactive ML Model Browser and Editor
//! 
//! Provides interactive interfaces for exploring, editing, and understanding
//! machine learning models in an educational context.

pub mod browser;
pub mod editor;
pub mod visualization;
pub mod tutorials;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Interactive Model Browser Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveBrowserConfig {
    pub enable_model_exploration: bool,
    pub enable_real_time_editing: bool,
    pub enable_visual_debugging: bool,
    pub enable_educational_annotations: bool,
    pub enable_collaborative_features: bool,
    pub visualization_quality: VisualizationQuality,
    pub educational_mode: EducationalMode,
    pub accessibility_features: AccessibilityFeatures,
}

/// Visualization Quality Settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VisualizationQuality {
    Low,
    Medium,
    High,
    Ultra,
}

/// Educational Mode Options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EducationalMode {
    Guided,
    Interactive,
    Assessment,
    Research,
}

/// Accessibility Features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityFeatures {
    pub screen_reader_support: bool,
    pub high_contrast_mode: bool,
    pub keyboard_navigation: bool,
    pub voice_commands: bool,
    pub text_scaling: bool,
}

/// Interactive Browser Session
#[derive(Debug)]
pub struct InteractiveBrowserSession {
    pub session_id: String,
    pub config: InteractiveBrowserConfig,
    pub model_explorer: ModelExplorer,
    pub code_editor: CodeEditor,
    pub visualization_engine: VisualizationEngine,
    pub tutorial_system: TutorialSystem,
    pub collaborative_space: CollaborativeSpace,
}

/// Model Explorer Interface
#[derive(Debug)]
pub struct ModelExplorer {
    pub loaded_models: HashMap<String, EducationalModelInfo>,
    pub exploration_history: Vec<ExplorationRecord>,
    pub current_model: Option<ModelView>,
    pub model_comparison: ModelComparisonTool,
    pub educational_annotations: HashMap<String, EducationalAnnotation>,
}

/// Educational Model Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalModelInfo {
    pub model_id: String,
    pub model_name: String,
    pub model_type: EducationalModelType,
    pub architecture_description: String,
    pub learning_objectives: Vec<String>,
    pub difficulty_level: ModelDifficultyLevel,
    pub estimated_completion_time: std::time::Duration,
    pub prerequisite_concepts: Vec<String>,
    pub interactive_elements: Vec<InteractiveElement>,
}

/// Educational Model Types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EducationalModelType {
    FeedForward,
    Convolutional,
    Recurrent,
    Transformer,
    Generative,
    Reinforcement,
    Ensemble,
    Custom,
}

/// Model Difficulty Levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ModelDifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Interactive Elements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveElement {
    pub element_id: String,
    pub element_type: InteractiveElementType,
    pub title: String,
    pub description: String,
    pub educational_benefit: String,
    pub implementation: String,
    pub accessibility_info: AccessibilityInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InteractiveElementType {
    ParameterSlider,
    WeightVisualizer,
    ActivationHeatmap,
    GradientFlow,
    PerformanceMonitor,
    EducationalQuiz,
    InteractiveTutorial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityInfo {
    pub screen_reader_description: String,
    pub keyboard_shortcut: Option<String>,
    pub voice_command: Option<String>,
    pub alternative_text: String,
}

/// Exploration Record
#[derive(Debug, Clone)]
pub struct ExplorationRecord {
    pub timestamp: std::time::SystemTime,
    pub model_id: String,
    pub exploration_path: Vec<ExplorationStep>,
    pub time_spent: std::time::Duration,
    pub concepts_learned: Vec<String>,
    pub interactions_count: usize,
}

/// Exploration Step
#[derive(Debug, Clone)]
pub struct ExplorationStep {
    pub step_type: ExplorationStepType,
    pub description: String,
    pub parameters_changed: HashMap<String, serde_json::Value>,
    pub observations: Vec<String>,
    pub learning_outcomes: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum ExplorationStepType {
    LayerInspection,
    ParameterModification,
    VisualizationGeneration,
    PerformanceAnalysis,
    EducationalQuiz,
}

/// Model View Interface
#[derive(Debug, Clone)]
pub struct ModelView {
    pub model_info: EducationalModelInfo,
    pub layer_tree: LayerTree,
    pub parameter_browser: ParameterBrowser,
    pub visualization_panels: Vec<VisualizationPanel>,
    pub educational_overlay: EducationalOverlay,
}

/// Layer Tree Structure
#[derive(Debug, Clone)]
pub struct LayerTree {
    pub root_layer: LayerNode,
    pub total_layers: usize,
    pub layer_types: HashMap<String, Vec<String>>,
    pub educational_descriptions: HashMap<String, LayerDescription>,
}

/// Layer Node in Tree
#[derive(Debug, Clone)]
pub struct LayerNode {
    pub layer_id: String,
    pub layer_type: String,
    pub layer_name: String,
    pub position: LayerPosition,
    pub parameters: LayerParameters,
    pub children: Vec<LayerNode>,
    pub educational_notes: Vec<String>,
    pub visualization_config: LayerVisualizationConfig,
}

#[derive(Debug, Clone)]
pub struct LayerPosition {
    pub depth: usize,
    pub index: usize,
    pub relative_position: (f32, f32),
}

#[derive(Debug, Clone)]
pub struct LayerParameters {
    pub input_shape: Option<Vec<usize>>,
    pub output_shape: Option<Vec<usize>>,
    pub parameter_count: usize,
    pub trainable_parameters: usize,
    pub parameter_values: HashMap<String, Vec<f32>>,
}

/// Layer Educational Description
#[derive(Debug, Clone)]
pub struct LayerDescription {
    pub concept_explanation: String,
    pub mathematical_formulation: String,
    pub real_world_analogy: String,
    pub common_mistakes: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub interactive_exercises: Vec<InteractiveExercise>,
}

#[derive(Debug, Clone)]
pub struct InteractiveExercise {
    pub exercise_id: String,
    pub exercise_type: ExerciseType,
    pub description: String,
    pub instructions: String,
    pub expected_outcome: String,
    pub assessment_criteria: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum ExerciseType {
    ParameterTuning,
    Visualization,
    Calculation,
    Debugging,
    Comparison,
}

/// Layer Visualization Configuration
#[derive(Debug, Clone)]
pub struct LayerVisualizationConfig {
    pub weight_visualization: WeightVisConfig,
    pub activation_visualization: ActivationVisConfig,
    pub gradient_visualization: GradientVisConfig,
    pub educational_annotations: bool,
}

#[derive(Debug, Clone)]
pub struct WeightVisConfig {
    pub visualization_type: WeightVisType,
    pub color_scheme: String,
    pub animation_enabled: bool,
    pub educational_highlights: bool,
}

#[derive(Debug, Clone)]
pub enum WeightVisType {
    Heatmap,
    Network,
    Distribution,
    Evolution,
}

#[derive(Debug, Clone)]
pub struct ActivationVisConfig {
    pub visualization_type: ActivationVisType,
    pub sample_data: Option<Vec<f32>>,
    pub interactive_hover: bool,
    pub educational_tooltips: bool,
}

#[derive(Debug, Clone)]
pub enum ActivationVisType {
    BarChart,
    LineChart,
    Heatmap,
    3DPlot,
}

#[derive(Debug, Clone)]
pub struct GradientVisConfig {
    pub show_flow: bool,
    pub show_magnitude: bool,
    pub educational_arrows: bool,
    pub color_coding: bool,
}

/// Parameter Browser Interface
#[derive(Debug, Clone)]
pub struct ParameterBrowser {
    pub parameters: HashMap<String, ParameterInfo>,
    pub parameter_groups: HashMap<String, Vec<String>>,
    pub modification_history: Vec<ParameterModification>,
    pub educational_hints: HashMap<String, ParameterHint>,
}

/// Parameter Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub parameter_name: String,
    pub parameter_type: ParameterType,
    pub current_value: serde_json::Value,
    pub value_range: Option<(serde_json::Value, serde_json::Value)>,
    pub description: String,
    pub educational_significance: String,
    pub modification_allowed: bool,
    pub default_value: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParameterType {
    Weight,
    Bias,
    LearningRate,
    Momentum,
    Regularization,
    Custom,
}

/// Parameter Modification Record
#[derive(Debug, Clone)]
pub struct ParameterModification {
    pub parameter_name: String,
    pub old_value: serde_json::Value,
    pub new_value: serde_json::Value,
    pub timestamp: std::time::SystemTime,
    pub user_reason: String,
    pub educational_impact: String,
}

/// Parameter Educational Hint
#[derive(Debug, Clone)]
pub struct ParameterHint {
    pub hint_type: ParameterHintType,
    pub content: String,
    pub context: String,
    pub visual_cue: Option<String>,
    pub priority: HintPriority,
}

#[derive(Debug, Clone)]
pub enum ParameterHintType {
    Warning,
    Suggestion,
    Explanation,
    Tip,
    CommonMistake,
}

#[derive(Debug, Clone)]
pub enum HintPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Visualization Panel
#[derive(Debug, Clone)]
pub struct VisualizationPanel {
    pub panel_id: String,
    pub panel_type: VisualizationPanelType,
    pub title: String,
    pub content: VisualizationContent,
    pub layout_config: PanelLayoutConfig,
    pub educational_context: PanelEducationalContext,
}

#[derive(Debug, Clone)]
pub enum VisualizationPanelType {
    WeightMatrix,
    ActivationPatterns,
    GradientFlow,
    PerformanceMetrics,
    LearningCurve,
    NetworkArchitecture,
    ParameterDistribution,
    EducationalQuiz,
}

/// Visualization Content
#[derive(Debug, Clone)]
pub struct VisualizationContent {
    pub data: serde_json::Value,
    pub visualization_config: serde_json::Value,
    pub interactive_elements: Vec<InteractiveElement>,
    pub educational_annotations: Vec<VisualizationAnnotation>,
}

/// Visualization Annotation
#[derive(Debug, Clone)]
pub struct VisualizationAnnotation {
    pub annotation_id: String,
    pub position: (f32, f32),
    pub annotation_type: AnnotationType,
    pub content: String,
    pub educational_purpose: String,
    pub visibility: AnnotationVisibility,
}

#[derive(Debug, Clone)]
pub enum AnnotationType {
    Explanation,
    Warning,
    Tip,
    Question,
    Highlight,
}

#[derive(Debug, Clone)]
pub enum AnnotationVisibility {
    Always,
    OnHover,
    OnClick,
    Conditional,
}

/// Panel Layout Configuration
#[derive(Debug, Clone)]
pub struct PanelLayoutConfig {
    pub width_percentage: f32,
    pub height_percentage: f32,
    pub position: PanelPosition,
    pub resizable: bool,
    pub collapsible: bool,
    pub z_index: u32,
}

#[derive(Debug, Clone)]
pub struct PanelPosition {
    pub x: f32,
    pub y: f32,
    pub anchor: PanelAnchor,
}

#[derive(Debug, Clone)]
pub enum PanelAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
    Custom,
}

/// Panel Educational Context
#[derive(Debug, Clone)]
pub struct PanelEducationalContext {
    pub learning_objective: String,
    pub difficulty_level: DifficultyLevel,
    pub prerequisite_concepts: Vec<String>,
    pub assessment_opportunities: Vec<AssessmentOpportunity>,
    pub progression_path: Vec<ProgressionStep>,
}

/// Assessment Opportunity
#[derive(Debug, Clone)]
pub struct AssessmentOpportunity {
    pub assessment_type: AssessmentType,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub hints: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum AssessmentType {
    MultipleChoice,
    TrueFalse,
    FillInBlank,
    ParameterCalculation,
    Conceptual,
}

/// Progression Step
#[derive(Debug, Clone)]
pub struct ProgressionStep {
    pub step_description: String,
    pub completed: bool,
    pub prerequisites_met: bool,
    pub estimated_time: std::time::Duration,
    pub learning_outcome: String,
}

/// Educational Overlay
#[derive(Debug, Clone)]
pub struct EducationalOverlay {
    pub learning_objectives: Vec<LearningObjective>,
    pub progress_indicators: Vec<ProgressIndicator>,
    pub interactive_help: InteractiveHelpSystem,
    pub assessment_feedback: AssessmentFeedback,
    pub next_steps: Vec<NextStepRecommendation>,
}

/// Learning Objective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningObjective {
    pub objective_id: String,
    pub objective_text: String,
    pub competency_level: CompetencyLevel,
    pub assessment_method: String,
    pub success_criteria: Vec<String>,
    pub evidence_collection: Vec<String>,
}

/// Progress Indicator
#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    pub indicator_type: ProgressIndicatorType,
    pub current_progress: f32,
    pub target_progress: f32,
    pub visual_representation: ProgressVisualization,
    pub educational_message: String,
}

#[derive(Debug, Clone)]
pub enum ProgressIndicatorType {
    ConceptMastery,
    SkillDevelopment,
    ExerciseCompletion,
    AssessmentPerformance,
}

/// Progress Visualization
#[derive(Debug, Clone)]
pub struct ProgressVisualization {
    pub visualization_type: ProgressVisType,
    pub color_scheme: String,
    pub animation_enabled: bool,
    pub educational_text: String,
}

#[derive(Debug, Clone)]
pub enum ProgressVisType {
    ProgressBar,
    CircularProgress,
    AchievementBadges,
    SkillTree,
}

/// Interactive Help System
#[derive(Debug, Clone)]
pub struct InteractiveHelpSystem {
    pub contextual_help: HashMap<String, ContextualHelp>,
    pub search_functionality: HelpSearchSystem,
    pub tutorial_integration: TutorialIntegration,
    pub peer_assistance: PeerAssistanceSystem,
}

/// Contextual Help
#[derive(Debug, Clone)]
pub struct ContextualHelp {
    pub context: String,
    pub help_content: String,
    pub examples: Vec<String>,
    pub related_concepts: Vec<String>,
    pub difficulty_level: HelpDifficulty,
}

#[derive(Debug, Clone)]
pub enum HelpDifficulty {
    Basic,
    Intermediate,
    Advanced,
}

/// Help Search System
#[derive(Debug, Clone)]
pub struct HelpSearchSystem {
    pub search_index: HashMap<String, HelpEntry>,
    pub search_suggestions: Vec<String>,
    pub recent_searches: Vec<String>,
    pub educational_ranking: EducationalRankingSystem,
}

#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub entry_id: String,
    pub title: String,
    pub content: String,
    pub relevance_score: f32,
    pub educational_value: f32,
}

/// Educational Ranking System
#[derive(Debug, Clone)]
pub struct EducationalRankingSystem {
    pub ranking_criteria: Vec<RankingCriterion>,
    pub personalization_weights: HashMap<String, f32>,
    pub learning_style_preferences: LearningStylePreferences,
}

#[derive(Debug, Clone)]
pub struct RankingCriterion {
    pub criterion_name: String,
    pub weight: f32,
    pub description: String,
}

/// Learning Style Preferences
#[derive(Debug, Clone)]
pub struct LearningStylePreferences {
    pub preferred_modality: LearningModality,
    pub pacing_preference: PacingPreference,
    pub interaction_style: InteractionStyle,
}

#[derive(Debug, Clone)]
pub enum LearningModality {
    Visual,
    Auditory,
    Kinesthetic,
    ReadingWriting,
}

#[derive(Debug, Clone)]
pub enum PacingPreference {
    SelfPaced,
    GuidedPace,
    Accelerated,
    Structured,
}

#[derive(Debug, Clone)]
pub enum InteractionStyle {
    Independent,
    Collaborative,
    Mentored,
    PeerLearning,
}

/// Tutorial Integration
#[derive(Debug, Clone)]
pub struct TutorialIntegration {
    pub current_tutorial: Option<TutorialSession>,
    pub tutorial_progress: HashMap<String, TutorialProgress>,
    pub adaptive_tutorials: Vec<AdaptiveTutorial>,
    pub checkpoint_system: CheckpointSystem,
}

#[derive(Debug, Clone)]
pub struct TutorialSession {
    pub tutorial_id: String,
    pub tutorial_name: String,
    pub current_step: usize,
    pub total_steps: usize,
    pub step_history: Vec<TutorialStep>,
    pub educational_objectives: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TutorialStep {
    pub step_number: usize,
    pub step_description: String,
    pub actions_required: Vec<String>,
    pub expected_outcomes: Vec<String>,
    pub hints_available: Vec<String>,
    pub completion_criteria: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TutorialProgress {
    pub tutorial_id: String,
    pub completion_percentage: f32,
    pub current_step: usize,
    pub time_spent: std::time::Duration,
    pub learning_assessment: Vec<LearningAssessment>,
}

/// Adaptive Tutorial
#[derive(Debug, Clone)]
pub struct AdaptiveTutorial {
    pub tutorial_id: String,
    pub adaptation_rules: Vec<AdaptationRule>,
    pub personalization_factors: PersonalizationFactors,
    pub success_metrics: Vec<SuccessMetric>,
}

#[derive(Debug, Clone)]
pub struct AdaptationRule {
    pub condition: String,
    pub adaptation_action: String,
    pub educational_rationale: String,
    pub effectiveness_measure: f32,
}

/// Personalization Factors
#[derive(Debug, Clone)]
pub struct PersonalizationFactors {
    pub learning_speed: f32,
    pub concept_mastery_level: f32,
    pub interaction_preferences: InteractionPreferences,
    pub motivation_level: f32,
}

/// Success Metrics
#[derive(Debug, Clone)]
pub struct SuccessMetric {
    pub metric_name: String,
    pub target_value: f32,
    pub measurement_method: String,
    pub educational_significance: String,
}

/// Checkpoint System
#[derive(Debug, Clone)]
pub struct CheckpointSystem {
    pub checkpoints: Vec<Checkpoint>,
    pub progress_tracking: ProgressTracking,
    pub achievement_system: AchievementSystem,
}

#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub checkpoint_id: String,
    pub checkpoint_name: String,
    pub requirements: Vec<String>,
    pub rewards: Vec<CheckpointReward>,
    pub educational_benefits: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CheckpointReward {
    pub reward_type: RewardType,
    pub reward_description: String,
    pub value: f32,
    pub unlocking: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum RewardType {
    KnowledgePoint,
    SkillBadge,
    AccessUnlock,
    Achievement,
}

/// Progress Tracking
#[derive(Debug, Clone)]
pub struct ProgressTracking {
    pub completed_checkpoints: Vec<String>,
    pub progress_percentage: f32,
    pub learning_velocity: f32,
    pub engagement_score: f32,
}

/// Achievement System
#[derive(Debug, Clone)]
pub struct AchievementSystem {
    pub earned_achievements: Vec<Achievement>,
    pub achievement_progress: HashMap<String, f32>,
    pub milestone_rewards: Vec<MilestoneReward>,
}

#[derive(Debug, Clone)]
pub struct Achievement {
    pub achievement_id: String,
    pub achievement_name: String,
    pub description: String,
    pub icon: String,
    pub rarity: AchievementRarity,
    pub educational_value: String,
}

#[derive(Debug, Clone)]
pub enum AchievementRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Peer Assistance System
#[derive(Debug, Clone)]
pub struct PeerAssistanceSystem {
    pub available_peers: Vec<PeerInfo>,
    pub assistance_requests: Vec<AssistanceRequest>,
    pub knowledge_sharing: KnowledgeSharingSystem,
    pub collaborative_sessions: Vec<CollaborativeSession>,
}

/// Peer Information
#[derive(Debug, Clone)]
pub struct PeerInfo {
    pub peer_id: String,
    pub peer_name: String,
    pub expertise_areas: Vec<String>,
    pub availability_status: AvailabilityStatus,
    pub assistance_rating: f32,
    pub educational_background: String,
}

#[derive(Debug, Clone)]
pub enum AvailabilityStatus {
    Available,
    Busy,
    Away,
    Unavailable,
}

/// Assistance Request
#[derive(Debug, Clone)]
pub struct AssistanceRequest {
    pub request_id: String,
    pub requester_id: String,
    pub topic: String,
    pub urgency: RequestUrgency,
    pub description: String,
    pub context: AssistanceContext,
    pub status: RequestStatus,
}

#[derive(Debug, Clone)]
pub enum RequestUrgency {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone)]
pub struct AssistanceContext {
    pub current_model: Option<String>,
    pub current_task: String,
    pub difficulty_level: DifficultyLevel,
    pub time_constraint: Option<std::time::Duration>,
}

#[derive(Debug, Clone)]
pub enum RequestStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

/// Knowledge Sharing System
#[derive(Debug, Clone)]
pub struct KnowledgeSharingSystem {
    pub shared_knowledge: Vec<KnowledgeItem>,
    pub knowledge_rating: KnowledgeRatingSystem,
    pub topic_experts: HashMap<String, Vec<String>>,
    pub learning_recommendations: Vec<LearningRecommendation>,
}

/// Knowledge Item
#[derive(Debug, Clone)]
pub struct KnowledgeItem {
    pub item_id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub topic_tags: Vec<String>,
    pub educational_value: f32,
    pub verification_status: VerificationStatus,
}

/// Knowledge Rating System
#[derive(Debug, Clone)]
pub struct KnowledgeRatingSystem {
    pub ratings: HashMap<String, Vec<Rating>>,
    pub consensus_score: f32,
    pub expert_endorsements: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Rating {
    pub rater_id: String,
    pub rating_value: f32,
    pub rating_comment: String,
    pub helpfulness_score: f32,
}

/// Collaborative Session
#[derive(Debug, Clone)]
pub struct CollaborativeSession {
    pub session_id: String,
    pub session_name: String,
    pub participants: Vec<String>,
    pub session_type: CollaborativeSessionType,
    pub start_time: std::time::SystemTime,
    pub duration: Option<std::time::Duration>,
    pub objectives: Vec<String>,
    pub outcomes: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum CollaborativeSessionType {
    JointExploration,
    PeerReview,
    ProblemSolving,
    KnowledgeSharing,
    Assessment,
}

/// Model Comparison Tool
#[derive(Debug, Clone)]
pub struct ModelComparisonTool {
    pub comparison_sessions: Vec<ComparisonSession>,
    pub comparison_criteria: Vec<ComparisonCriterion>,
    pub historical_comparisons: Vec<HistoricalComparison>,
    pub educational_comparison_framework: EducationalComparisonFramework,
}

/// Comparison Session
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    pub session_id: String,
    pub models_to_compare: Vec<String>,
    pub comparison_focus: ComparisonFocus,
    pub results: Option<ComparisonResults>,
    pub educational_insights: Vec<EducationalInsight>,
}

#[derive(Debug, Clone)]
pub enum ComparisonFocus {
    Architecture,
    Performance,
    EducationalValue,
    Complexity,
    UseCase,
}

/// Comparison Criterion
#[derive(Debug, Clone)]
pub struct ComparisonCriterion {
    pub criterion_name: String,
    pub description: String,
    pub weight: f32,
    pub measurement_method: String,
    pub educational_rationale: String,
}

/// Historical Comparison
#[derive(Debug, Clone)]
pub struct HistoricalComparison {
    pub comparison_date: std::time::SystemTime,
    pub models_compared: Vec<String>,
    pub winner: String,
    pub confidence_score: f32,
    pub learning_outcomes: Vec<String>,
}

/// Educational Comparison Framework
#[derive(Debug, Clone)]
pub struct EducationalComparisonFramework {
    pub learning_objectives: Vec<String>,
    pub assessment_criteria: Vec<AssessmentCriterion>,
    pub progression_path: Vec<ComparisonStep>,
    pub mastery_indicators: Vec<MasteryIndicator>,
}

/// Code Editor Interface
#[derive(Debug, Clone)]
pub struct CodeEditor {
    pub editor_config: CodeEditorConfig,
    pub syntax_highlighting: SyntaxHighlighting,
    pub educational_features: EducationalCodeFeatures,
    pub code_templates: HashMap<String, CodeTemplate>,
    pub validation_system: CodeValidationSystem,
}

/// Code Editor Configuration
#[derive(Debug, Clone)]
pub struct CodeEditorConfig {
    pub theme: EditorTheme,
    pub font_size: u32,
    pub line_numbers: bool,
    pub code_folding: bool,
    pub auto_completion: bool,
    pub educational_mode: bool,
}

#[derive(Debug, Clone)]
pub enum EditorTheme {
    Light,
    Dark,
    HighContrast,
    Educational,
}

/// Syntax Highlighting
#[derive(Debug, Clone)]
pub struct SyntaxHighlighting {
    pub language_support: Vec<String>,
    pub custom_rules: HashMap<String, HighlightRule>,
    pub educational_comments: bool,
    pub concept_highlighting: bool,
}

#[derive(Debug, Clone)]
pub struct HighlightRule {
    pub pattern: String,
    pub color: String,
    pub style: HighlightStyle,
    pub educational_note: Option<String>,
}

#[derive(Debug, Clone)]
pub enum HighlightStyle {
    Normal,
    Bold,
    Italic,
    Underline,
}

/// Educational Code Features
#[derive(Debug, Clone)]
pub struct EducationalCodeFeatures {
    pub step_by_step_execution: bool,
    pub variable_inspector: bool,
    pub educational_comments: bool,
    pub concept_mapping: bool,
    pub debugging_assistance: bool,
    pub code_analysis: bool,
}

/// Code Template
#[derive(Debug, Clone)]
pub struct CodeTemplate {
    pub template_id: String,
    pub template_name: String,
    pub template_type: TemplateType,
    pub code_content: String,
    pub educational_notes: Vec<String>,
    pub difficulty_level: DifficultyLevel,
}

#[derive(Debug, Clone)]
pub enum TemplateType {
    BasicModel,
    AdvancedArchitecture,
    EducationalExample,
    AssessmentTemplate,
}

/// Code Validation System
#[derive(Debug, Clone)]
pub struct CodeValidationSystem {
    pub syntax_validator: SyntaxValidator,
    pub educational_validator: EducationalValidator,
    pub best_practices_checker: BestPracticesChecker,
    pub security_validator: SecurityValidator,
}

#[derive(Debug, Clone)]
pub struct SyntaxValidator {
    pub validation_rules: Vec<ValidationRule>,
    pub error_messages: HashMap<String, ErrorMessage>,
    pub auto_correction_suggestions: Vec<AutoCorrection>,
}

/// Visualization Engine
#[derive(Debug, Clone)]
pub struct VisualizationEngine {
    pub render_engine: RenderEngine,
    pub animation_system: AnimationSystem,
    pub interaction_handler: InteractionHandler,
    pub export_system: ExportSystem,
}

/// Render Engine
#[derive(Debug, Clone)]
pub struct RenderEngine {
    pub supported_formats: Vec<VisualizationFormat>,
    pub quality_settings: QualitySettings,
    pub performance_optimization: PerformanceOptimization,
    pub accessibility_support: AccessibilitySupport,
}

/// Tutorial System
#[derive(Debug, Clone)]
pub struct TutorialSystem {
    pub available_tutorials: HashMap<String, TutorialInfo>,
    pub current_tutorial: Option<ActiveTutorial>,
    pub tutorial_progression: TutorialProgressionSystem,
    pub adaptive_tutorial_engine: AdaptiveTutorialEngine,
}

/// Tutorial Information
#[derive(Debug, Clone)]
pub struct TutorialInfo {
    pub tutorial_id: String,
    pub tutorial_name: String,
    pub description: String,
    pub difficulty_level: DifficultyLevel,
    pub estimated_duration: std::time::Duration,
    pub learning_objectives: Vec<String>,
    pub prerequisites: Vec<String>,
}

/// Active Tutorial
#[derive(Debug, Clone)]
pub struct ActiveTutorial {
    pub tutorial_info: TutorialInfo,
    pub current_step: usize,
    pub step_completion: HashMap<usize, bool>,
    pub interactive_elements: Vec<InteractiveTutorialElement>,
    pub assessment_results: Vec<AssessmentResult>,
}

/// Interactive Tutorial Element
#[derive(Debug, Clone)]
pub struct InteractiveTutorialElement {
    pub element_id: String,
    pub element_type: TutorialElementType,
    pub description: String,
    pub action_required: String,
    pub success_criteria: String,
    pub hints: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum TutorialElementType {
    ParameterAdjustment,
    ModelExploration,
    CodeImplementation,
    Quiz,
    Reflection,
}

/// Collaborative Space
#[derive(Debug, Clone)]
pub struct CollaborativeSpace {
    pub active_sessions: HashMap<String, CollaborativeSession>,
    pub shared_models: Vec<SharedModel>,
    pub communication_system: CommunicationSystem,
    pub collaborative_features: CollaborativeFeatures,
}

/// Shared Model
#[derive(Debug, Clone)]
pub struct SharedModel {
    pub model_id: String,
    pub model_name: String,
    pub owner_id: String,
    pub sharing_permissions: SharingPermissions,
    pub version_history: Vec<ModelVersion>,
    pub collaborative_notes: Vec<CollaborativeNote>,
}

/// Sharing Permissions
#[derive(Debug, Clone)]
pub struct SharingPermissions {
    pub can_view: bool,
    pub can_edit: bool,
    pub can_comment: bool,
    pub can_share: bool,
    pub expiration_date: Option<std::time::SystemTime>,
}

/// Communication System
#[derive(Debug, Clone)]
pub struct CommunicationSystem {
    pub chat_rooms: HashMap<String, ChatRoom>,
    pub direct_messages: Vec<DirectMessage>,
    pub voice_calls: Vec<VoiceCall>,
    pub video_sessions: Vec<VideoSession>,
}

/// Chat Room
#[derive(Debug, Clone)]
pub struct ChatRoom {
    pub room_id: String,
    pub room_name: String,
    pub participants: Vec<String>,
    pub messages: Vec<ChatMessage>,
    pub room_type: RoomType,
}

/// Chat Message
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub message_id: String,
    pub sender_id: String,
    pub message_content: String,
    pub timestamp: std::time::SystemTime,
    pub message_type: MessageType,
    pub educational_context: Option<String>,
}

/// Collaborative Features
#[derive(Debug, Clone)]
pub struct CollaborativeFeatures {
    pub real_time_editing: bool,
    pub version_control: bool,
    pub commenting_system: bool,
    pub peer_review: bool,
    pub knowledge_sharing: bool,
    pub assessment_collaboration: bool,
}

impl InteractiveBrowserSession {
    /// Create a new interactive browser session
    pub fn new(config: InteractiveBrowserConfig) -> Self {
        println!("Creating new interactive browser session");
        
        Self {
            session_id: format!("browser_session_{}", std::time::SystemTime::now().elapsed().unwrap().as_secs()),
            config,
            model_explorer: ModelExplorer {
                loaded_models: HashMap::new(),
                exploration_history: Vec::new(),
                current_model: None,
                model_comparison: ModelComparisonTool {
                    comparison_sessions: Vec::new(),
                    comparison_criteria: Vec::new(),
                    historical_comparisons: Vec::new(),
                    educational_comparison_framework: EducationalComparisonFramework {
                        learning_objectives: Vec::new(),
                        assessment_criteria: Vec::new(),
                        progression_path: Vec::new(),
                        mastery_indicators: Vec::new(),
                    },
                },
                educational_annotations: HashMap::new(),
            },
            code_editor: CodeEditor {
                editor_config: CodeEditorConfig {
                    theme: EditorTheme::Educational,
                    font_size: 14,
                    line_numbers: true,
                    code_folding: true,
                    auto_completion: true,
                    educational_mode: true,
                },
                syntax_highlighting: SyntaxHighlighting {
                    language_support: vec!["python".to_string(), "rust".to_string()],
                    custom_rules: HashMap::new(),
                    educational_comments: true,
                    concept_highlighting: true,
                },
                educational_features: EducationalCodeFeatures {
                    step_by_step_execution: true,
                    variable_inspector: true,
                    educational_comments: true,
                    concept_mapping: true,
                    debugging_assistance: true,
                    code_analysis: true,
                },
                code_templates: HashMap::new(),
                validation_system: CodeValidationSystem {
                    syntax_validator: SyntaxValidator {
                        validation_rules: Vec::new(),
                        error_messages: HashMap::new(),
                        auto_correction_suggestions: Vec::new(),
                    },
                    educational_validator: EducationalValidator {
                        educational_rules: Vec::new(),
                        conceptual_checks: Vec::new(),
                        learning_checks: Vec::new(),
                    },
                    best_practices_checker: BestPracticesChecker {
                        best_practice_rules: Vec::new(),
                        style_guides: Vec::new(),
                        educational_principles: Vec::new(),
                    },
                    security_validator: SecurityValidator {
                        security_rules: Vec::new(),
                        permission_checks: Vec::new(),
                        educational_security: Vec::new(),
                    },
                },
            },
            visualization_engine: VisualizationEngine {
                render_engine: RenderEngine {
                    supported_formats: vec![
                        VisualizationFormat::WebGL,
                        VisualizationFormat::SVG,
                        VisualizationFormat::Canvas,
                    ],
                    quality_settings: QualitySettings {
                        resolution: "1920x1080".to_string(),
                        anti_aliasing: true,
                        texture_quality: TextureQuality::High,
                    },
                    performance_optimization: PerformanceOptimization {
                        culling_enabled: true,
                        level_of_detail: true,
                        frustum_culling: true,
                    },
                    accessibility_support: AccessibilitySupport {
                        screen_reader_compatible: true,
                        high_contrast_mode: true,
                        keyboard_navigation: true,
                    },
                },
                animation_system: AnimationSystem {
                    supported_animations: vec![
                        AnimationType::SmoothTransition,
                        AnimationType::EducationalHighlight,
                        AnimationType::PerformanceCounter,
                    ],
                    easing_functions: HashMap::new(),
                    educational_animation_config: EducationalAnimationConfig {
                        learning_focused_animations: true,
                        concept_transitions: true,
                        progress_indicators: true,
                    },
                },
                interaction_handler: InteractionHandler {
                    input_methods: vec![
                        InputMethod::Mouse,
                        InputMethod::Keyboard,
                        InputMethod::Touch,
                        InputMethod::Voice,
                    ],
                    gesture_recognition: true,
                    accessibility_interactions: true,
                },
                export_system: ExportSystem {
                    supported_formats: vec![
                        ExportFormat::PNG,
                        ExportFormat::SVG,
                        ExportFormat::PDF,
                        ExportFormat::InteractiveHTML,
                    ],
                    educational_export_options: true,
                    accessibility_export: true,
                },
            },
            tutorial_system: TutorialSystem {
                available_tutorials: HashMap::new(),
                current_tutorial: None,
                tutorial_progression: TutorialProgressionSystem {
                    progress_tracking: HashMap::new(),
                    completion_analytics: HashMap::new(),
                    adaptive_recommendations: Vec::new(),
                    learning_analytics: LearningAnalytics {
                        learning_patterns: HashMap::new(),
                        engagement_metrics: HashMap::new(),
                        retention_analysis: HashMap::new(),
                        effectiveness_measures: HashMap::new(),
                    },
                },
                adaptive_tutorial_engine: AdaptiveTutorialEngine {
                    adaptation_algorithms: Vec::new(),
                    personalization_factors: PersonalizationFactors {
                        learning_speed: 0.5,
                        concept_mastery_level: 0.5,
                        interaction_preferences: InteractionPreferences {
                            modality_preference: LearningModality::Visual,
                            interaction_style: InteractionStyle::Independent,
                            pacing_preference: PacingPreference::SelfPaced,
                        },
                        motivation_level: 0.7,
                    },
                    success_prediction: SuccessPredictionSystem {
                        prediction_models: HashMap::new(),
                        accuracy_metrics: HashMap::new(),
                        adaptation_effectiveness: HashMap::new(),
                    },
                },
            },
            collaborative_space: CollaborativeSpace {
                active_sessions: HashMap::new(),
                shared_models: Vec::new(),
                communication_system: CommunicationSystem {
                    chat_rooms: HashMap::new(),
                    direct_messages: Vec::new(),
                    voice_calls: Vec::new(),
                    video_sessions: Vec::new(),
                },
                collaborative_features: CollaborativeFeatures {
                    real_time_editing: true,
                    version_control: true,
                    commenting_system: true,
                    peer_review: true,
                    knowledge_sharing: true,
                    assessment_collaboration: true,
                },
            },
        }
    }

    /// Load educational model for exploration
    pub fn load_model(&mut self, model_info: EducationalModelInfo) -> Result<(), BrowserError> {
        println!("Loading educational model: {}", model_info.model_name);
        
        // Add model to explorer
        self.model_explorer.loaded_models.insert(
            model_info.model_id.clone(),
            model_info.clone()
        );

        // Create model view
        let model_view = self.create_model_view(&model_info)?;
        self.model_explorer.current_model = Some(model_view);

        // Load associated tutorials
        self.load_associated_tutorials(&model_info)?;

        Ok(())
    }

    /// Create model view interface
    fn create_model_view(&self, model_info: &EducationalModelInfo) -> Result<ModelView, BrowserError> {
        let layer_tree = LayerTree {
            root_layer: LayerNode {
                layer_id: "root".to_string(),
                layer_type: "Network".to_string(),
                layer_name: model_info.model_name.clone(),
                position: LayerPosition {
                    depth: 0,
                    index: 0,
                    relative_position: (0.0, 0.0),
                },
                parameters: LayerParameters {
                    input_shape: None,
                    output_shape: None,
                    parameter_count: 0,
                    trainable_parameters: 0,
                    parameter_values: HashMap::new(),
                },
                children: Vec::new(),
                educational_notes: vec![
                    "Start here to understand the model architecture".to_string(),
                    "Each layer builds upon the previous".to_string(),
                ],
                visualization_config: LayerVisualizationConfig {
                    weight_visualization: WeightVisConfig {
                        visualization_type: WeightVisType::Heatmap,
                        color_scheme: "educational".to_string(),
                        animation_enabled: true,
                        educational_highlights: true,
                    },
                    activation_visualization: ActivationVisConfig {
                        visualization_type: ActivationVisType::BarChart,
                        sample_data: None,
                        interactive_hover: true,
                        educational_tooltips: true,
                    },
                    gradient_visualization: GradientVisConfig {
                        show_flow: true,
                        show_magnitude: true,
                        educational_arrows: true,
                        color_coding: true,
                    },
                    educational_annotations: true,
                },
            },
            total_layers: 0,
            layer_types: HashMap::new(),
            educational_descriptions: HashMap::new(),
        };

        let parameter_browser = ParameterBrowser {
            parameters: HashMap::new(),
            parameter_groups: HashMap::new(),
            modification_history: Vec::new(),
            educational_hints: HashMap::new(),
        };

        let visualization_panels = vec![
            VisualizationPanel {
                panel_id: "architecture_overview".to_string(),
                panel_type: VisualizationPanelType::NetworkArchitecture,
                title: "Network Architecture".to_string(),
                content: VisualizationContent {
                    data: serde_json::Value::Null,
                    visualization_config: serde_json::Value::Null,
                    interactive_elements: Vec::new(),
                    educational_annotations: Vec::new(),
                },
                layout_config: PanelLayoutConfig {
                    width_percentage: 100.0,
                    height_percentage: 50.0,
                    position: PanelPosition {
                        x: 0.0,
                        y: 0.0,
                        anchor: PanelAnchor::TopLeft,
                    },
                    resizable: true,
                    collapsible: false,
                    z_index: 1,
                },
                educational_context: PanelEducationalContext {
                    learning_objective: "Understand model architecture".to_string(),
                    difficulty_level: DifficultyLevel::Beginner,
                    prerequisite_concepts: vec!["Neural networks basics".to_string()],
                    assessment_opportunities: vec![
                        AssessmentOpportunity {
                            assessment_type: AssessmentType::Conceptual,
                            question: "How many layers does this model have?".to_string(),
                            options: vec!["1".to_string(), "2".to_string(), "3".to_string()],
                            correct_answer: 0,
                            explanation: "This model has a simple single-layer architecture".to_string(),
                            hints: vec!["Look at the layer tree".to_string()],
                        }
                    ],
                    progression_path: vec![
                        ProgressionStep {
                            step_description: "Explore the network structure".to_string(),
                            completed: false,
                            prerequisites_met: true,
                            estimated_time: std::time::Duration::from_secs(300),
                            learning_outcome: "Understand basic architecture".to_string(),
                        }
                    ],
                },
            }
        ];

        let educational_overlay = EducationalOverlay {
            learning_objectives: vec![
                LearningObjective {
                    objective_id: "understand_architecture".to_string(),
                    objective_text: "Understand the model architecture".to_string(),
                    competency_level: CompetencyLevel::Understanding,
                    assessment_method: "Interactive exploration".to_string(),
                    success_criteria: vec![
                        "Can describe each layer".to_string(),
                        "Understands data flow".to_string(),
                    ],
                    evidence_collection: vec![
                        "Layer exploration".to_string(),
                        "Parameter modification".to_string(),
                    ],
                }
            ],
            progress_indicators: vec![
                ProgressIndicator {
                    indicator_type: ProgressIndicatorType::ConceptMastery,
                    current_progress: 0.0,
                    target_progress: 1.0,
                    visual_representation: ProgressVisualization {
                        visualization_type: ProgressVisType::ProgressBar,
                        color_scheme: "#4CAF50".to_string(),
                        animation_enabled: true,
                        educational_text: "0% Complete".to_string(),
                    },
                    educational_message: "Start exploring to track your progress".to_string(),
                }
            ],
            interactive_help: InteractiveHelpSystem {
                contextual_help: HashMap::new(),
                search_functionality: HelpSearchSystem {
                    search_index: HashMap::new(),
                    search_suggestions: vec!["layers".to_string(), "parameters".to_string()],
                    recent_searches: Vec::new(),
                    educational_ranking: EducationalRankingSystem {
                        ranking_criteria: vec![
                            RankingCriterion {
                                criterion_name: "Educational Value".to_string(),
                                weight: 0.6,
                                description: "How useful for learning".to_string(),
                            },
                            RankingCriterion {
                                criterion_name: "Relevance".to_string(),
                                weight: 0.4,
                                description: "How relevant to current context".to_string(),
                            },
                        ],
                        personalization_weights: HashMap::new(),
                        learning_style_preferences: LearningStylePreferences {
                            preferred_modality: LearningModality::Visual,
                            pacing_preference: PacingPreference::SelfPaced,
                            interaction_style: InteractionStyle::Independent,
                        },
                    },
                },
                tutorial_integration: TutorialIntegration {
                    current_tutorial: None,
                    tutorial_progress: HashMap::new(),
                    adaptive_tutorials: Vec::new(),
                    checkpoint_system: CheckpointSystem {
                        checkpoints: Vec::new(),
                        progress_tracking: ProgressTracking {
                            completed_checkpoints: Vec::new(),
                            progress_percentage: 0.0,
                            learning_velocity: 0.0,
                            engagement_score: 0.0,
                        },
                        achievement_system: AchievementSystem {
                            earned_achievements: Vec::new(),
                            achievement_progress: HashMap::new(),
                            milestone_rewards: Vec::new(),
                        },
                    },
                },
                peer_assistance: PeerAssistanceSystem {
                    available_peers: Vec::new(),
                    assistance_requests: Vec::new(),
                    knowledge_sharing: KnowledgeSharingSystem {
                        shared_knowledge: Vec::new(),
                        knowledge_rating: KnowledgeRatingSystem {
                            ratings: HashMap::new(),
                            consensus_score: 0.0,
                            expert_endorsements: Vec::new(),
                        },
                        topic_experts: HashMap::new(),
                        learning_recommendations: Vec::new(),
                    },
                    collaborative_sessions: Vec::new(),
                },
            },
            assessment_feedback: AssessmentFeedback {
                recent_assessments: Vec::new(),
                performance_trends: HashMap::new(),
                improvement_suggestions: Vec::new(),
                mastery_indicators: Vec::new(),
            },
            next_steps: vec![
                NextStepRecommendation {
                    recommendation_type: RecommendationType::Tutorial,
                    description: "Complete the basic tutorial".to_string(),
                    reasoning: "Build foundational understanding".to_string(),
                    expected_benefit: "Better model comprehension".to_string(),
                    implementation: "Click on tutorial button".to_string(),
                }
            ],
        };

        Ok(ModelView {
            model_info: model_info.clone(),
            layer_tree,
            parameter_browser,
            visualization_panels,
            educational_overlay,
        })
    }

    /// Load associated tutorials for model
    fn load_associated_tutorials(&mut self, model_info: &EducationalModelInfo) -> Result<(), BrowserError> {
        println!("Loading tutorials for model: {}", model_info.model_name);
        
        // Add a basic tutorial
        let tutorial = TutorialInfo {
            tutorial_id: format!("tutorial_{}", model_info.model_id),
            tutorial_name: format!("{} Tutorial", model_info.model_name),
            description: format!("Learn about {}", model_info.model_name),
            difficulty_level: model_info.difficulty_level.clone(),
            estimated_duration: std::time::Duration::from_secs(1800), // 30 minutes
            learning_objectives: model_info.learning_objectives.clone(),
            prerequisites: model_info.prerequisite_concepts.clone(),
        };

        self.tutorial_system.available_tutorials.insert(
            tutorial.tutorial_id.clone(),
            tutorial
        );

        Ok(())
    }

    /// Start interactive exploration session
    pub fn start_exploration(&mut self) -> Result<ExplorationSession, BrowserError> {
        println!("Starting interactive exploration session");
        
        let exploration_session = ExplorationSession {
            session_id: self.session_id.clone(),
            start_time: std::time::SystemTime::now(),
            model_context: self.model_explorer.current_model.clone(),
            interaction_log: Vec::new(),
            learning_analytics: LearningAnalyticsSession {
                interactions: Vec::new(),
                time_spent: std::time::Duration::from_secs(0),
                concepts_encountered: Vec::new(),
                assessment_results: Vec::new(),
            },
        };

        Ok(exploration_session)
    }

    /// Get current model information
    pub fn get_current_model(&self) -> Option<&ModelView> {
        self.model_explorer.current_model.as_ref()
    }

    /// Get exploration progress
    pub fn get_exploration_progress(&self) -> ExplorationProgress {
        ExplorationProgress {
            total_explorations: self.model_explorer.exploration_history.len(),
            models_explored: self.model_explorer.loaded_models.len(),
            concepts_mastered: 0, // Would calculate from exploration history
            time_spent: std::time::Duration::from_secs(0),
            achievements_earned: 0,
        }
    }
}

/// Supporting types and enums

#[derive(Debug, Clone)]
pub struct ExplorationSession {
    pub session_id: String,
    pub start_time: std::time::SystemTime,
    pub model_context: Option<ModelView>,
    pub interaction_log: Vec<Interaction>,
    pub learning_analytics: LearningAnalyticsSession,
}

#[derive(Debug, Clone)]
pub struct Interaction {
    pub timestamp: std::time::SystemTime,
    pub interaction_type: InteractionType,
    pub target: String,
    pub parameters: HashMap<String, serde_json::Value>,
    pub outcome: InteractionOutcome,
    pub educational_impact: String,
}

#[derive(Debug, Clone)]
pub enum InteractionType {
    LayerClick,
    ParameterChange,
    VisualizationGenerate,
    QuizAnswer,
    HelpAccess,
}

#[derive(Debug, Clone)]
pub struct InteractionOutcome {
    pub success: bool,
    pub error_message: Option<String>,
    pub learning_progress: f32,
    pub educational_feedback: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LearningAnalyticsSession {
    pub interactions: Vec<Interaction>,
    pub time_spent: std::time::Duration,
    pub concepts_encountered: Vec<String>,
    pub assessment_results: Vec<AssessmentResult>,
}

#[derive(Debug, Clone)]
pub struct AssessmentResult {
    pub assessment_type: AssessmentType,
    pub score: f32,
    pub feedback: String,
    pub timestamp: std::time::SystemTime,
}

#[derive(Debug, Clone)]
pub struct ExplorationProgress {
    pub total_explorations: usize,
    pub models_explored: usize,
    pub concepts_mastered: usize,
    pub time_spent: std::time::Duration,
    pub achievements_earned: usize,
}

// Additional supporting types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompetencyLevel {
    Awareness,
    Understanding,
    Application,
    Analysis,
    Synthesis,
    Evaluation,
}

#[derive(Debug, Clone)]
pub enum RecommendationType {
    Tutorial,
    Exercise,
    Assessment,
    Exploration,
    Help,
}

// Additional structures for completeness
#[derive(Debug, Clone)]
pub struct AssessmentFeedback {
    pub recent_assessments: Vec<AssessmentResult>,
    pub performance_trends: HashMap<String, f32>,
    pub improvement_suggestions: Vec<String>,
    pub mastery_indicators: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NextStepRecommendation {
    pub recommendation_type: RecommendationType,
    pub description: String,
    pub reasoning: String,
    pub expected_benefit: String,
    pub implementation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VisualizationFormat {
    WebGL,
    SVG,
    Canvas,
    PNG,
    PDF,
}

#[derive(Debug, Clone)]
pub struct QualitySettings {
    pub resolution: String,
    pub anti_aliasing: bool,
    pub texture_quality: TextureQuality,
}

#[derive(Debug, Clone)]
pub enum TextureQuality {
    Low,
    Medium,
    High,
    Ultra,
}

#[derive(Debug, Clone)]
pub struct PerformanceOptimization {
    pub culling_enabled: bool,
    pub level_of_detail: bool,
    pub frustum_culling: bool,
}

#[derive(Debug, Clone)]
pub struct AccessibilitySupport {
    pub screen_reader_compatible: bool,
    pub high_contrast_mode: bool,
    pub keyboard_navigation: bool,
}

#[derive(Debug, Clone)]
pub struct AnimationSystem {
    pub supported_animations: Vec<AnimationType>,
    pub easing_functions: HashMap<String, EasingFunction>,
    pub educational_animation_config: EducationalAnimationConfig,
}

#[derive(Debug, Clone)]
pub enum AnimationType {
    SmoothTransition,
    EducationalHighlight,
    PerformanceCounter,
}

#[derive(Debug, Clone)]
pub struct EducationalAnimationConfig {
    pub learning_focused_animations: bool,
    pub concept_transitions: bool,
    pub progress_indicators: bool,
}

#[derive(Debug, Clone)]
pub struct EasingFunction {
    pub name: String,
    pub curve: String,
    pub educational_note: String,
}

#[derive(Debug, Clone)]
pub struct InteractionHandler {
    pub input_methods: Vec<InputMethod>,
    pub gesture_recognition: bool,
    pub accessibility_interactions: bool,
}

#[derive(Debug, Clone)]
pub enum InputMethod {
    Mouse,
    Keyboard,
    Touch,
    Voice,
}

#[derive(Debug, Clone)]
pub struct ExportSystem {
    pub supported_formats: Vec<ExportFormat>,
    pub educational_export_options: bool,
    pub accessibility_export: bool,
}

#[derive(Debug, Clone)]
pub enum ExportFormat {
    PNG,
    SVG,
    PDF,
    InteractiveHTML,
}

#[derive(Debug, Clone)]
pub struct TutorialProgressionSystem {
    pub progress_tracking: HashMap<String, TutorialProgress>,
    pub completion_analytics: HashMap<String, CompletionAnalytics>,
    pub adaptive_recommendations: Vec<AdaptiveRecommendation>,
    pub learning_analytics: LearningAnalytics,
}

#[derive(Debug, Clone)]
pub struct CompletionAnalytics {
    pub completion_rate: f32,
    pub average_completion_time: std::time::Duration,
    pub difficulty_progression: Vec<DifficultyProgression>,
    pub engagement_metrics: HashMap<String, f32>,
}

#[derive(Debug, Clone)]
pub struct AdaptiveRecommendation {
    pub recommendation_type: String,
    pub content: String,
    pub reasoning: String,
    pub expected_benefit: String,
}

#[derive(Debug, Clone)]
pub struct LearningAnalytics {
    pub learning_patterns: HashMap<String, LearningPattern>,
    pub engagement_metrics: HashMap<String, EngagementMetric>,
    pub retention_analysis: HashMap<String, RetentionAnalysis>,
    pub effectiveness_measures: HashMap<String, EffectivenessMeasure>,
}

#[derive(Debug, Clone)]
pub struct LearningPattern {
    pub pattern_type: String,
    pub frequency: f32,
    pub effectiveness: f32,
    pub educational_insights: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EngagementMetric {
    pub metric_name: String,
    pub current_value: f32,
    pub trend: String,
    pub target_value: f32,
}

#[derive(Debug, Clone)]
pub struct RetentionAnalysis {
    pub retention_rate: f32,
    pub drop_off_points: Vec<String>,
    pub improvement_strategies: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EffectivenessMeasure {
    pub measure_type: String,
    pub score: f32,
    pub confidence_interval: (f32, f32),
    pub improvement_potential: f32,
}

#[derive(Debug, Clone)]
pub struct AdaptiveTutorialEngine {
    pub adaptation_algorithms: Vec<AdaptationAlgorithm>,
    pub personalization_factors: PersonalizationFactors,
    pub success_prediction: SuccessPredictionSystem,
}

#[derive(Debug, Clone)]
pub struct AdaptationAlgorithm {
    pub algorithm_name: String,
    pub algorithm_type: String,
    pub parameters: HashMap<String, serde_json::Value>,
    pub effectiveness_score: f32,
}

#[derive(Debug, Clone)]
pub struct SuccessPredictionSystem {
    pub prediction_models: HashMap<String, PredictionModel>,
    pub accuracy_metrics: HashMap<String, AccuracyMetric>,
    pub adaptation_effectiveness: HashMap<String, AdaptationEffectiveness>,
}

#[derive(Debug, Clone)]
pub struct PredictionModel {
    pub model_type: String,
    pub accuracy: f32,
    pub features_used: Vec<String>,
    pub prediction_horizon: std::time::Duration,
}

#[derive(Debug, Clone)]
pub struct AccuracyMetric {
    pub metric_name: String,
    pub accuracy_score: f32,
    pub confidence_level: f32,
    pub validation_method: String,
}

#[derive(Debug, Clone)]
pub struct AdaptationEffectiveness {
    pub adaptation_type: String,
    pub effectiveness_score: f32,
    pub user_satisfaction: f32,
    pub learning_improvement: f32,
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Model loading error: {0}")]
    ModelLoadingError(String),
    
    #[error("Visualization error: {0}")]
    VisualizationError(String),
    
    #[error("Educational configuration error: {0}")]
    EducationalError(String),
    
    #[error("Collaboration error: {0}")]
    CollaborationError(String),
}