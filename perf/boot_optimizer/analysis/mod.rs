use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use std::collections::{HashMap, VecDeque, BTreeMap};
use std::sync::{Arc, Mutex, RwLock};

#[derive(Clone, Debug)]
pub struct BootType {
    pub boot_type: BootTypeKind,
    pub timestamp: u64,
    pub duration: Duration,
    pub optimizations_applied: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootTypeKind {
    ColdBoot,
    WarmBoot,
    ResumeFromHibernate,
    ResumeFromSleep,
}

#[derive(Clone, Debug)]
pub struct BootAnalysis {
    pub boot_type: BootTypeKind,
    pub total_duration: Duration,
    pub phase_durations: HashMap<String, Duration>,
    pub optimizations: Vec<OptimizationApplied>,
    pub performance_score: f64,
    pub energy_consumption: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct OptimizationApplied {
    pub name: String,
    pub phase: String,
    pub improvement: Duration,
    pub success: bool,
}

#[derive(Clone, Debug)]
pub struct BootMetrics {
    pub cold_boot_times: VecDeque<Duration>,
    pub warm_boot_times: VecDeque<Duration>,
    pub hibernate_times: VecDeque<Duration>,
    pub sleep_times: VecDeque<Duration>,
    pub phase_averages: HashMap<String, BTreeMap<BootTypeKind, Duration>>,
    pub optimizations_history: Vec<OptimizationApplied>,
}

pub struct BootAnalyzer {
    metrics: Arc<RwLock<BootMetrics>>,
    config: BootAnalysisConfig,
}

#[derive(Clone)]
pub struct BootAnalysisConfig {
    pub history_size: usize,
    pub enable_energy_analysis: bool,
    pub enable_predictive_optimization: bool,
    pub analysis_window: Duration,
    pub min_samples_for_analysis: usize,
}

impl Default for BootAnalysisConfig {
    fn default() -> Self {
        Self {
            history_size: 100,
            enable_energy_analysis: true,
            enable_predictive_optimization: true,
            analysis_window: Duration::from_secs(3600), // 1 hour
            min_samples_for_analysis: 10,
        }
    }
}

impl BootMetrics {
    fn new(max_history: usize) -> Self {
        Self {
            cold_boot_times: VecDeque::with_capacity(max_history),
            warm_boot_times: VecDeque::with_capacity(max_history),
            hibernate_times: VecDeque::with_capacity(max_history),
            sleep_times: VecDeque::with_capacity(max_history),
            phase_averages: HashMap::new(),
            optimizations_history: Vec::new(),
        }
    }

    fn add_boot_time(&mut self, boot_type: BootTypeKind, duration: Duration) {
        let times = match boot_type {
            BootTypeKind::ColdBoot => &mut self.cold_boot_times,
            BootTypeKind::WarmBoot => &mut self.warm_boot_times,
            BootTypeKind::ResumeFromHibernate => &mut self.hibernate_times,
            BootTypeKind::ResumeFromSleep => &mut self.sleep_times,
        };

        times.push_back(duration);
        
        // Maintain history size
        if times.len() > 100 {
            times.pop_front();
        }
    }

    fn add_phase_duration(&mut self, phase: String, boot_type: BootTypeKind, duration: Duration) {
        self.phase_averages
            .entry(phase)
            .or_insert_with(BTreeMap::new)
            .insert(boot_type, duration);
    }
}

impl BootAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(RwLock::new(BootMetrics::new(100))),
            config: BootAnalysisConfig::default(),
        }
    }

    pub fn new_with_config(config: BootAnalysisConfig) -> Self {
        Self {
            metrics: Arc::new(RwLock::new(BootMetrics::new(config.history_size))),
            config,
        }
    }

    pub fn record_boot(&self, boot_type: BootTypeKind, duration: Duration, optimizations: Vec<String>) {
        let mut metrics = self.metrics.write().unwrap();
        metrics.add_boot_time(boot_type, duration);
        
        // Record optimizations applied
        for opt in optimizations {
            metrics.optimizations_history.push(OptimizationApplied {
                name: opt,
                phase: "overall".to_string(),
                improvement: Duration::from_millis(0), // Would be calculated
                success: true,
            });
        }
    }

    pub fn record_boot_with_phases(&self, boot_type: BootTypeKind, duration: Duration, phase_durations: HashMap<String, Duration>) {
        let mut metrics = self.metrics.write().unwrap();
        metrics.add_boot_time(boot_type, duration);
        
        for (phase, phase_duration) in phase_durations {
            metrics.add_phase_duration(phase, boot_type, phase_duration);
        }
    }

    pub fn analyze_boot_performance(&self) -> BootPerformanceAnalysis {
        let metrics = self.metrics.read().unwrap();
        
        let mut analysis = BootPerformanceAnalysis::new();
        
        // Calculate average times for each boot type
        if !metrics.cold_boot_times.is_empty() {
            let avg_cold: Duration = metrics.cold_boot_times.iter().sum::<Duration>() / metrics.cold_boot_times.len() as u32;
            analysis.average_cold_boot = Some(avg_cold);
        }
        
        if !metrics.warm_boot_times.is_empty() {
            let avg_warm: Duration = metrics.warm_boot_times.iter().sum::<Duration>() / metrics.warm_boot_times.len() as u32;
            analysis.average_warm_boot = Some(avg_warm);
        }
        
        if !metrics.hibernate_times.is_empty() {
            let avg_hibernate: Duration = metrics.hibernate_times.iter().sum::<Duration>() / metrics.hibernate_times.len() as u32;
            analysis.average_hibernate_resume = Some(avg_hibernate);
        }
        
        if !metrics.sleep_times.is_empty() {
            let avg_sleep: Duration = metrics.sleep_times.iter().sum::<Duration>() / metrics.sleep_times.len() as u32;
            analysis.average_sleep_resume = Some(avg_sleep);
        }
        
        // Calculate improvement ratios
        if let (Some(cold), Some(warm)) = (analysis.average_cold_boot, analysis.average_warm_boot) {
            analysis.warm_boot_improvement = Some(cold - warm);
            analysis.warm_boot_improvement_ratio = if cold > Duration::from_millis(0) {
                warm.as_millis() as f64 / cold.as_millis() as f64
            } else {
                0.0
            };
        }
        
        // Analyze phase performance
        for (phase, boot_type_times) in &metrics.phase_averages {
            let phase_analysis = self.analyze_phase_performance(phase, boot_type_times);
            analysis.phase_analysis.insert(phase.clone(), phase_analysis);
        }
        
        // Calculate overall performance score
        analysis.performance_score = self.calculate_performance_score(&metrics);
        
        // Analyze optimization effectiveness
        analysis.optimization_effectiveness = self.analyze_optimization_effectiveness(&metrics);
        
        analysis
    }

    fn analyze_phase_performance(&self, phase: &str, boot_type_times: &BTreeMap<BootTypeKind, Duration>) -> PhasePerformanceAnalysis {
        let mut phase_analysis = PhasePerformanceAnalysis::new(phase.to_string());
        
        for (boot_type, duration) in boot_type_times {
            phase_analysis.boot_type_times.insert(boot_type.clone(), *duration);
        }
        
        // Find best and worst performing boot types
        if !boot_type_times.is_empty() {
            let mut times: Vec<_> = boot_type_times.iter().collect();
            times.sort_by(|a, b| a.1.cmp(b.1));
            
            if let Some((fastest_type, fastest_time)) = times.first() {
                phase_analysis.fastest_boot_type = Some((*fastest_type.clone(), *fastest_time));
            }
            
            if let Some((slowest_type, slowest_time)) = times.last() {
                phase_analysis.slowest_boot_type = Some((*slowest_type.clone(), *slowest_time));
            }
            
            // Calculate variance
            let avg_time: Duration = boot_type_times.values().sum::<Duration>() / boot_type_times.len() as u32;
            let variance: Duration = boot_type_times.values()
                .map(|&t| {
                    let diff = if t > avg_time { t - avg_time } else { avg_time - t };
                    diff * diff
                })
                .sum::<Duration>() / boot_type_times.len() as u32;
            
            phase_analysis.variance = variance;
        }
        
        phase_analysis
    }

    fn calculate_performance_score(&self, metrics: &BootMetrics) -> f64 {
        let mut total_score = 0.0;
        let mut score_components = 0.0;
        
        // Cold boot score (target: < 2 seconds)
        if let Some(avg_cold) = self.get_average_cold_boot(metrics) {
            let cold_score = if avg_cold <= Duration::from_millis(2000) {
                100.0
            } else {
                (2000.0 / avg_cold.as_millis() as f64) * 100.0
            };
            total_score += cold_score;
            score_components += 1.0;
        }
        
        // Warm boot score (target: < 1 second)
        if let Some(avg_warm) = self.get_average_warm_boot(metrics) {
            let warm_score = if avg_warm <= Duration::from_millis(1000) {
                100.0
            } else {
                (1000.0 / avg_warm.as_millis() as f64) * 100.0
            };
            total_score += warm_score;
            score_components += 1.0;
        }
        
        // Consistency score (lower variance = higher score)
        let consistency_score = self.calculate_consistency_score(metrics);
        total_score += consistency_score;
        score_components += 1.0;
        
        if score_components > 0.0 {
            total_score / score_components
        } else {
            0.0
        }
    }

    fn get_average_cold_boot(&self, metrics: &BootMetrics) -> Option<Duration> {
        if metrics.cold_boot_times.is_empty() {
            None
        } else {
            Some(metrics.cold_boot_times.iter().sum::<Duration>() / metrics.cold_boot_times.len() as u32)
        }
    }

    fn get_average_warm_boot(&self, metrics: &BootMetrics) -> Option<Duration> {
        if metrics.warm_boot_times.is_empty() {
            None
        } else {
            Some(metrics.warm_boot_times.iter().sum::<Duration>() / metrics.warm_boot_times.len() as u32)
        }
    }

    fn calculate_consistency_score(&self, metrics: &BootMetrics) -> f64 {
        let mut total_variance = 0.0;
        let mut phase_count = 0.0;
        
        for boot_times in [&metrics.cold_boot_times, &metrics.warm_boot_times].iter() {
            if boot_times.len() >= 2 {
                let avg: Duration = boot_times.iter().sum::<Duration>() / boot_times.len() as u32;
                let variance: Duration = boot_times.iter()
                    .map(|&t| {
                        let diff = if t > avg { t - avg } else { avg - t };
                        diff * diff
                    })
                    .sum::<Duration>() / (boot_times.len() - 1) as u32;
                
                total_variance += variance.as_millis() as f64;
                phase_count += 1.0;
            }
        }
        
        if phase_count > 0.0 {
            let avg_variance = total_variance / phase_count;
            // Convert variance to consistency score (lower variance = higher score)
            (1000.0 / (avg_variance + 1.0)) * 10.0
        } else {
            0.0
        }
    }

    fn analyze_optimization_effectiveness(&self, metrics: &BootMetrics) -> OptimizationEffectivenessAnalysis {
        let mut analysis = OptimizationEffectivenessAnalysis::new();
        
        // Group optimizations by name
        let mut optimization_groups: HashMap<String, Vec<&OptimizationApplied>> = HashMap::new();
        for opt in &metrics.optimizations_history {
            optimization_groups
                .entry(opt.name.clone())
                .or_insert_with(Vec::new)
                .push(opt);
        }
        
        for (opt_name, opt_instances) in optimization_groups {
            let success_rate = if !opt_instances.is_empty() {
                opt_instances.iter().filter(|opt| opt.success).count() as f64 / opt_instances.len() as f64
            } else {
                0.0
            };
            
            analysis.optimization_stats.insert(opt_name, OptimizationStats {
                usage_count: opt_instances.len(),
                success_rate,
                total_improvement: opt_instances.iter().map(|opt| opt.improvement).sum(),
            });
        }
        
        analysis
    }

    pub fn generate_optimization_recommendations(&self) -> Vec<OptimizationRecommendation> {
        let analysis = self.analyze_boot_performance();
        let mut recommendations = Vec::new();
        
        // Cold boot recommendations
        if let Some(avg_cold) = analysis.average_cold_boot {
            if avg_cold > Duration::from_millis(2000) {
                recommendations.push(OptimizationRecommendation {
                    priority: Priority::High,
                    category: "Cold Boot".to_string(),
                    recommendation: "Optimize cold boot sequence to achieve sub-2-second target".to_string(),
                    expected_improvement: avg_cold - Duration::from_millis(2000),
                    implementation_effort: "Medium".to_string(),
                    risk_level: "Low".to_string(),
                });
            }
        }
        
        // Warm boot recommendations
        if let Some(avg_warm) = analysis.average_warm_boot {
            if avg_warm > Duration::from_millis(1000) {
                recommendations.push(OptimizationRecommendation {
                    priority: Priority::Medium,
                    category: "Warm Boot".to_string(),
                    recommendation: "Enable warm boot optimizations to improve resume times".to_string(),
                    expected_improvement: avg_warm - Duration::from_millis(1000),
                    implementation_effort: "Low".to_string(),
                    risk_level: "Low".to_string(),
                });
            }
        }
        
        // Phase-specific recommendations
        for (phase, phase_analysis) in &analysis.phase_analysis {
            if let Some((_, fastest_time)) = &phase_analysis.fastest_boot_type {
                if let Some((_, slowest_time)) = &phase_analysis.slowest_boot_type {
                    let improvement_potential = *slowest_time - *fastest_time;
                    if improvement_potential > Duration::from_millis(100) {
                        recommendations.push(OptimizationRecommendation {
                            priority: Priority::Medium,
                            category: format!("Phase: {}", phase),
                            recommendation: format!("Optimize {} phase to achieve faster boot times", phase),
                            expected_improvement: improvement_potential,
                            implementation_effort: "Medium".to_string(),
                            risk_level: "Medium".to_string(),
                        });
                    }
                }
            }
        }
        
        recommendations.sort_by(|a, b| b.expected_improvement.cmp(&a.expected_improvement));
        recommendations
    }

    pub fn predict_boot_time(&self, boot_type: BootTypeKind) -> Option<Duration> {
        let metrics = self.metrics.read().unwrap();
        
        let times = match boot_type {
            BootTypeKind::ColdBoot => &metrics.cold_boot_times,
            BootTypeKind::WarmBoot => &metrics.warm_boot_times,
            BootTypeKind::ResumeFromHibernate => &metrics.hibernate_times,
            BootTypeKind::ResumeFromSleep => &metrics.sleep_times,
        };
        
        if times.len() < 3 {
            return None;
        }
        
        // Simple prediction based on recent trend
        let recent_times: Vec<_> = times.iter().rev().take(5).collect();
        let avg_recent: Duration = recent_times.iter().sum::<Duration>() / recent_times.len() as u32;
        
        Some(avg_recent)
    }

    pub fn compare_boot_types(&self) -> BootTypeComparison {
        let analysis = self.analyze_boot_performance();
        
        let mut comparison = BootTypeComparison::new();
        
        if let Some(cold) = analysis.average_cold_boot {
            comparison.add_boot_type_data(BootTypeKind::ColdBoot, cold, self.get_sample_count(BootTypeKind::ColdBoot));
        }
        
        if let Some(warm) = analysis.average_warm_boot {
            comparison.add_boot_type_data(BootTypeKind::WarmBoot, warm, self.get_sample_count(BootTypeKind::WarmBoot));
        }
        
        comparison
    }

    fn get_sample_count(&self, boot_type: BootTypeKind) -> usize {
        let metrics = self.metrics.read().unwrap();
        match boot_type {
            BootTypeKind::ColdBoot => metrics.cold_boot_times.len(),
            BootTypeKind::WarmBoot => metrics.warm_boot_times.len(),
            BootTypeKind::ResumeFromHibernate => metrics.hibernate_times.len(),
            BootTypeKind::ResumeFromSleep => metrics.sleep_times.len(),
        }
    }
}

pub struct BootPerformanceAnalysis {
    pub average_cold_boot: Option<Duration>,
    pub average_warm_boot: Option<Duration>,
    pub average_hibernate_resume: Option<Duration>,
    pub average_sleep_resume: Option<Duration>,
    pub warm_boot_improvement: Option<Duration>,
    pub warm_boot_improvement_ratio: f64,
    pub phase_analysis: HashMap<String, PhasePerformanceAnalysis>,
    pub performance_score: f64,
    pub optimization_effectiveness: OptimizationEffectivenessAnalysis,
}

#[derive(Clone, Debug)]
pub struct PhasePerformanceAnalysis {
    pub phase_name: String,
    pub boot_type_times: HashMap<BootTypeKind, Duration>,
    pub fastest_boot_type: Option<(BootTypeKind, Duration)>,
    pub slowest_boot_type: Option<(BootTypeKind, Duration)>,
    pub variance: Duration,
}

impl PhasePerformanceAnalysis {
    fn new(phase_name: String) -> Self {
        Self {
            phase_name,
            boot_type_times: HashMap::new(),
            fastest_boot_type: None,
            slowest_boot_type: None,
            variance: Duration::from_millis(0),
        }
    }
}

pub struct OptimizationEffectivenessAnalysis {
    pub optimization_stats: HashMap<String, OptimizationStats>,
}

#[derive(Clone, Debug)]
pub struct OptimizationStats {
    pub usage_count: usize,
    pub success_rate: f64,
    pub total_improvement: Duration,
}

impl OptimizationEffectivenessAnalysis {
    fn new() -> Self {
        Self {
            optimization_stats: HashMap::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OptimizationRecommendation {
    pub priority: Priority,
    pub category: String,
    pub recommendation: String,
    pub expected_improvement: Duration,
    pub implementation_effort: String,
    pub risk_level: String,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

pub struct BootTypeComparison {
    pub boot_type_data: HashMap<BootTypeKind, BootTypeData>,
}

#[derive(Clone, Debug)]
pub struct BootTypeData {
    pub average_time: Duration,
    pub sample_count: usize,
    pub performance_rating: f64,
}

impl BootTypeComparison {
    fn new() -> Self {
        Self {
            boot_type_data: HashMap::new(),
        }
    }
    
    fn add_boot_type_data(&mut self, boot_type: BootTypeKind, average_time: Duration, sample_count: usize) {
        let rating = self.calculate_performance_rating(average_time);
        self.boot_type_data.insert(boot_type, BootTypeData {
            average_time,
            sample_count,
            performance_rating: rating,
        });
    }
    
    fn calculate_performance_rating(&self, time: Duration) -> f64 {
        // Convert to score (lower time = higher score)
        1000.0 / time.as_millis() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_analyzer_creation() {
        let analyzer = BootAnalyzer::new();
        let analysis = analyzer.analyze_boot_performance();
        assert_eq!(analysis.performance_score, 0.0);
    }

    #[test]
    fn test_boot_recording() {
        let analyzer = BootAnalyzer::new();
        analyzer.record_boot(BootTypeKind::ColdBoot, Duration::from_millis(2500), vec!["fast_boot".to_string()]);
        
        let analysis = analyzer.analyze_boot_performance();
        assert!(analysis.average_cold_boot.is_some());
        assert_eq!(analysis.average_cold_boot.unwrap(), Duration::from_millis(2500));
    }

    #[test]
    fn test_optimization_recommendations() {
        let analyzer = BootAnalyzer::new();
        // Add slow cold boot data
        for _ in 0..10 {
            analyzer.record_boot(BootTypeKind::ColdBoot, Duration::from_millis(3000), vec![]);
        }
        
        let recommendations = analyzer.generate_optimization_recommendations();
        assert!(!recommendations.is_empty());
        assert_eq!(recommendations[0].category, "Cold Boot");
    }

    #[test]
    fn test_boot_type_prediction() {
        let analyzer = BootAnalyzer::new();
        // Add warm boot data
        for _ in 0..5 {
            analyzer.record_boot(BootTypeKind::WarmBoot, Duration::from_millis(800), vec![]);
        }
        
        let predicted = analyzer.predict_boot_time(BootTypeKind::WarmBoot);
        assert!(predicted.is_some());
    }
}
