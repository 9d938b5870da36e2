//! Predictive Maintenance Edge Computing
//! MultiOS Edge Computing Demonstrations

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant, SystemTime};
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use std::sync::{Arc, Mutex};

/// Sensor types for industrial equipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SensorType {
    Temperature,
    Vibration,
    Pressure,
    FlowRate,
    Voltage,
    Current,
    Acoustic,
    OilAnalysis,
    Custom(String),
}

/// Sensor reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    pub sensor_id: String,
    pub sensor_type: SensorType,
    pub value: f64,
    pub unit: String,
    pub timestamp: SystemTime,
    pub quality: SensorQuality,
    pub location: Option<(f64, f64)>,
}

/// Sensor quality indicators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorQuality {
    pub accuracy: f32,
    pub reliability: f32,
    pub calibration_date: SystemTime,
    pub error_code: Option<u32>,
}

/// Equipment types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EquipmentType {
    Motor,
    Pump,
    Compressor,
    Gearbox,
    Turbine,
    Conveyor,
    ConveyorBelt,
    RobotArm,
    CNC,
    Custom(String),
}

/// Equipment unit
#[derive(Debug, Clone)]
pub struct EquipmentUnit {
    pub unit_id: String,
    pub equipment_type: EquipmentType,
    pub manufacturer: String,
    pub model: String,
    pub installation_date: SystemTime,
    pub operational_hours: u64,
    pub sensors: Vec<SensorUnit>,
    pub maintenance_history: Vec<MaintenanceRecord>,
    pub operational_parameters: OperationalParameters,
    pub condition_status: EquipmentCondition,
}

/// Sensor unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorUnit {
    pub sensor_id: String,
    pub sensor_type: SensorType,
    pub location: String,
    pub sampling_rate_hz: f32,
    pub normal_range: (f64, f64),
    pub warning_threshold: (f64, f64),
    pub critical_threshold: (f64, f64),
}

/// Operational parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalParameters {
    pub rated_power_kw: f64,
    pub operating_voltage_v: f64,
    pub operating_current_a: f64,
    pub speed_rpm: f64,
    pub temperature_max_c: f64,
    pub pressure_max_bar: f64,
}

/// Maintenance record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub record_id: String,
    pub maintenance_type: MaintenanceType,
    pub performed_date: SystemTime,
    pub description: String,
    pub cost: f64,
    pub technician: String,
    pub parts_replaced: Vec<String>,
    pub next_maintenance_due: Option<SystemTime>,
}

/// Maintenance types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MaintenanceType {
    Routine,
    Preventive,
    Corrective,
    Emergency,
    Inspection,
    Calibration,
}

/// Equipment condition status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCondition {
    pub overall_health_score: f32, // 0.0 - 1.0
    pub predicted_failure_probability: f32, // 0.0 - 1.0
    pub remaining_useful_life_days: u32,
    pub risk_level: RiskLevel,
    pub recommended_actions: Vec<MaintenanceAction>,
    pub last_updated: SystemTime,
}

/// Risk levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Maintenance actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MaintenanceAction {
    ContinueMonitoring,
    ScheduleInspection,
    ScheduleMaintenance,
    ImmediateRepair,
    Replacement,
    EmergencyShutdown,
}

/// Predictive maintenance model
#[derive(Debug, Clone)]
pub struct PredictiveMaintenanceModel {
    pub model_id: String,
    pub equipment_type: EquipmentType,
    pub algorithm: PredictionAlgorithm,
    pub training_data_size: usize,
    pub accuracy_score: f32,
    pub last_trained: SystemTime,
    pub feature_weights: HashMap<String, f32>,
    pub threshold_config: ThresholdConfig,
}

/// Prediction algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PredictionAlgorithm {
    LinearRegression,
    RandomForest,
    NeuralNetwork,
    SupportVectorMachine,
    IsolationForest,
    Lstm,
    Transformer,
}

/// Threshold configuration for predictions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub anomaly_detection_threshold: f32,
    pub failure_probability_threshold: f32,
    pub maintenance_recommendation_threshold: f32,
    pub health_score_warning: f32,
    pub health_score_critical: f32,
}

/// Predictive maintenance engine
pub struct PredictiveMaintenanceEngine {
    pub equipment_registry: Arc<RwLock<HashMap<String, EquipmentUnit>>>,
    pub sensor_data_streams: Arc<RwLock<HashMap<String, SensorDataStream>>>,
    pub prediction_models: Arc<RwLock<HashMap<String, PredictiveMaintenanceModel>>>,
    pub alert_manager: Arc<Mutex<AlertManager>>,
    pub prediction_queue: Arc<RwLock<VecDeque<PredictionRequest>>>,
    pub performance_monitor: Arc<Mutex<PerformanceMonitor>>,
}

/// Sensor data stream
#[derive(Debug, Clone)]
pub struct SensorDataStream {
    pub sensor_id: String,
    pub readings: VecDeque<SensorReading>,
    pub max_buffer_size: usize,
    pub sampling_interval: Duration,
    pub last_reading: Option<SensorReading>,
}

/// Prediction request
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub equipment_id: String,
    pub request_type: PredictionType,
    pub priority: u8,
    pub created_at: SystemTime,
}

/// Prediction types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PredictionType {
    HealthAssessment,
    FailurePrediction,
    RemainingLifeEstimation,
    AnomalyDetection,
    MaintenanceRecommendation,
}

/// Prediction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub equipment_id: String,
    pub request_id: String,
    pub prediction_type: PredictionType,
    pub confidence_score: f32,
    pub predicted_value: Option<f64>,
    pub predicted_time: Option<SystemTime>,
    pub recommendations: Vec<MaintenanceAction>,
    pub risk_assessment: RiskAssessment,
    pub processing_time_ms: f64,
    pub timestamp: SystemTime,
}

/// Risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk_level: RiskLevel,
    pub probability_of_failure: f32,
    pub potential_impact: ImpactLevel,
    pub estimated_cost_of_failure: f64,
    pub mitigation_suggestions: Vec<String>,
}

/// Impact levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Severe,
}

/// Alert manager
#[derive(Debug, Clone)]
pub struct AlertManager {
    pub active_alerts: Vec<Alert>,
    pub alert_history: Vec<Alert>,
    pub notification_channels: Vec<NotificationChannel>,
}

/// Alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub alert_id: String,
    pub equipment_id: String,
    pub alert_type: AlertType,
    pub severity: RiskLevel,
    pub title: String,
    pub message: String,
    pub created_at: SystemTime,
    pub acknowledged: bool,
    pub resolved_at: Option<SystemTime>,
}

/// Alert types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlertType {
    SensorAnomaly,
    PredictedFailure,
    ThresholdExceeded,
    CommunicationLoss,
    CalibrationDrift,
    MaintenanceDue,
}

/// Notification channels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationChannel {
    Email { address: String },
    SMS { phone_number: String },
    PushNotification { device_id: String },
    Webhook { url: String },
    Dashboard,
}

/// Performance monitor for predictive maintenance
#[derive(Debug, Clone)]
pub struct PerformanceMonitor {
    pub total_predictions: u64,
    pub predictions_per_hour: f64,
    pub accuracy_rate: f32,
    pub avg_prediction_time_ms: f64,
    pub false_positive_rate: f32,
    pub false_negative_rate: f32,
    pub equipment_monitored: u32,
    pub alerts_generated: u64,
    pub maintenance_actions_recommended: u64,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self {
            total_predictions: 0,
            predictions_per_hour: 0.0,
            accuracy_rate: 0.0,
            avg_prediction_time_ms: 0.0,
            false_positive_rate: 0.0,
            false_negative_rate: 0.0,
            equipment_monitored: 0,
            alerts_generated: 0,
            maintenance_actions_recommended: 0,
        }
    }

    pub fn record_prediction(&mut self, processing_time_ms: f64) {
        self.total_predictions += 1;
        self.avg_prediction_time_ms = (self.avg_prediction_time_ms + processing_time_ms) / 2.0;
    }

    pub fn record_prediction_accuracy(&mut self, correct_prediction: bool) {
        if correct_prediction {
            self.accuracy_rate = (self.accuracy_rate + 1.0) / 2.0;
        } else {
            self.accuracy_rate = (self.accuracy_rate + 0.0) / 2.0;
        }
    }

    pub fn get_mttr(&self) -> f64 {
        // Mean Time To Response - simplified calculation
        if self.total_predictions > 0 {
            self.avg_prediction_time_ms
        } else {
            0.0
        }
    }
}

impl PredictiveMaintenanceEngine {
    pub fn new() -> Self {
        Self {
            equipment_registry: Arc::new(RwLock::new(HashMap::new())),
            sensor_data_streams: Arc::new(RwLock::new(HashMap::new())),
            prediction_models: Arc::new(RwLock::new(HashMap::new())),
            alert_manager: Arc::new(Mutex::new(AlertManager {
                active_alerts: Vec::new(),
                alert_history: Vec::new(),
                notification_channels: Vec::new(),
            })),
            prediction_queue: Arc::new(RwLock::new(VecDeque::new())),
            performance_monitor: Arc::new(Mutex::new(PerformanceMonitor::new())),
        }
    }

    /// Register equipment unit
    pub async fn register_equipment(&self, equipment: EquipmentUnit) -> Result<(), Box<dyn std::error::Error>> {
        let mut registry = self.equipment_registry.write().await;
        registry.insert(equipment.unit_id.clone(), equipment);
        
        // Initialize sensor data streams for the equipment
        {
            let mut streams = self.sensor_data_streams.write().await;
            if let Some(eq) = registry.get(&equipment.unit_id) {
                for sensor in &eq.sensors {
                    let stream = SensorDataStream {
                        sensor_id: sensor.sensor_id.clone(),
                        readings: VecDeque::new(),
                        max_buffer_size: 1000,
                        sampling_interval: Duration::from_secs((1.0 / sensor.sampling_rate_hz) as u64),
                        last_reading: None,
                    };
                    streams.insert(sensor.sensor_id.clone(), stream);
                }
            }
        }
        
        println!("Registered equipment unit: {}", equipment.unit_id);
        Ok(())
    }

    /// Submit sensor reading
    pub async fn submit_sensor_reading(&self, reading: SensorReading) -> Result<(), Box<dyn std::error::Error>> {
        let mut streams = self.sensor_data_streams.write().await;
        
        if let Some(stream) = streams.get_mut(&reading.sensor_id) {
            stream.readings.push_back(reading.clone());
            stream.last_reading = Some(reading);
            
            // Maintain buffer size
            if stream.readings.len() > stream.max_buffer_size {
                stream.readings.pop_front();
            }
            
            // Check for anomalies and trigger predictions
            if self.is_anomaly_detected(&reading, stream) {
                let prediction_request = PredictionRequest {
                    equipment_id: self.get_equipment_id_from_sensor(&reading.sensor_id).await,
                    request_type: PredictionType::AnomalyDetection,
                    priority: 8,
                    created_at: SystemTime::now(),
                };
                
                let mut queue = self.prediction_queue.write().await;
                queue.push_back(prediction_request);
            }
        }
        
        Ok(())
    }

    /// Submit prediction request
    pub async fn submit_prediction_request(&self, request: PredictionRequest) -> Result<(), Box<dyn std::error::Error>> {
        let mut queue = self.prediction_queue.write().await;
        queue.push_back(request);
        
        // Sort by priority periodically
        if queue.len() > 10 {
            queue.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
        
        Ok(())
    }

    /// Process prediction requests
    pub async fn process_predictions(&self) {
        let mut loop_count = 0;
        
        loop {
            loop_count += 1;
            
            // Get next prediction request
            let request_opt = {
                let mut queue = self.prediction_queue.write().await;
                if queue.is_empty() {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                }
                queue.pop_front()
            };
            
            if let Some(request) = request_opt {
                let start_time = Instant::now();
                
                // Process prediction based on type
                let result = match request.request_type {
                    PredictionType::HealthAssessment => {
                        self.predict_health_assessment(&request.equipment_id).await
                    }
                    PredictionType::FailurePrediction => {
                        self.predict_failure(&request.equipment_id).await
                    }
                    PredictionType::RemainingLifeEstimation => {
                        self.estimate_remaining_life(&request.equipment_id).await
                    }
                    PredictionType::AnomalyDetection => {
                        self.detect_anomalies(&request.equipment_id).await
                    }
                    PredictionType::MaintenanceRecommendation => {
                        self.generate_maintenance_recommendation(&request.equipment_id).await
                    }
                };
                
                let processing_time = start_time.elapsed();
                let processing_time_ms = processing_time.as_secs_f64() * 1000.0;
                
                match result {
                    Ok(prediction_result) => {
                        let mut result_with_time = prediction_result;
                        result_with_time.processing_time_ms = processing_time_ms;
                        result_with_time.timestamp = SystemTime::now();
                        
                        // Generate alerts if necessary
                        self.process_prediction_result(&result_with_time).await;
                        
                        // Update performance metrics
                        {
                            let mut monitor = self.performance_monitor.lock().unwrap();
                            monitor.record_prediction(processing_time_ms);
                        }
                        
                        println!("Completed {} prediction for {} in {:.2}ms", 
                                request.request_type.as_ref(), request.equipment_id, processing_time_ms);
                    }
                    Err(e) => {
                        println!("Prediction failed for {}: {}", request.equipment_id, e);
                    }
                }
            }
            
            // Periodically perform routine health assessments
            if loop_count % 100 == 0 {
                self.perform_routine_assessments().await;
            }
        }
    }

    /// Predict health assessment
    async fn predict_health_assessment(&self, equipment_id: &str) -> Result<PredictionResult, Box<dyn std::error::Error>> {
        // Simulate processing time
        tokio::time::sleep(Duration::from_millis(50)).await;
        
        let equipment_opt = {
            let registry = self.equipment_registry.read().await;
            registry.get(equipment_id).cloned()
        };
        
        match equipment_opt {
            Some(equipment) => {
                let health_score = self.calculate_health_score(&equipment).await;
                let confidence = rand::random::<f32>() * 0.2 + 0.8; // 0.8 - 1.0
                
                let risk_assessment = RiskAssessment {
                    overall_risk_level: if health_score > 0.8 {
                        RiskLevel::Low
                    } else if health_score > 0.6 {
                        RiskLevel::Medium
                    } else if health_score > 0.3 {
                        RiskLevel::High
                    } else {
                        RiskLevel::Critical
                    },
                    probability_of_failure: 1.0 - health_score,
                    potential_impact: ImpactLevel::Medium,
                    estimated_cost_of_failure: (1.0 - health_score) * 50000.0,
                    mitigation_suggestions: self.generate_mitigation_suggestions(health_score),
                };
                
                let recommendations = if health_score < 0.7 {
                    vec![MaintenanceAction::ScheduleInspection]
                } else {
                    vec![MaintenanceAction::ContinueMonitoring]
                };
                
                Ok(PredictionResult {
                    equipment_id: equipment_id.to_string(),
                    request_id: format!("pred-{}-{}", equipment_id, SystemTime::now().elapsed_since(SystemTime::UNIX_EPOCH)?.as_secs()),
                    prediction_type: PredictionType::HealthAssessment,
                    confidence_score: confidence,
                    predicted_value: Some(health_score as f64),
                    predicted_time: None,
                    recommendations,
                    risk_assessment,
                    processing_time_ms: 0.0, // Will be set by caller
                    timestamp: SystemTime::now(),
                })
            }
            None => Err("Equipment not found".into()),
        }
    }

    /// Calculate health score for equipment
    async fn calculate_health_score(&self, equipment: &EquipmentUnit) -> f32 {
        let mut total_score = 0.0;
        let mut sensor_count = 0;
        
        // Analyze sensor data streams
        let streams = self.sensor_data_streams.read().await;
        
        for sensor in &equipment.sensors {
            if let Some(stream) = streams.get(&sensor.sensor_id) {
                if let Some(latest_reading) = &stream.last_reading {
                    let sensor_score = self.calculate_sensor_health_score(latest_reading, sensor);
                    total_score += sensor_score;
                    sensor_count += 1;
                }
            }
        }
        
        if sensor_count > 0 {
            let base_score = total_score / sensor_count as f32;
            // Factor in operational hours (more hours = slightly lower health)
            let age_factor = 1.0 - (equipment.operational_hours as f32 / 100000.0) * 0.1;
            base_score * age_factor
        } else {
            0.5 // Default score if no sensor data
        }
    }

    /// Calculate health score for individual sensor
    fn calculate_sensor_health_score(&self, reading: &SensorReading, sensor: &SensorUnit) -> f32 {
        let (min_threshold, max_threshold) = sensor.warning_threshold;
        let (critical_min, critical_max) = sensor.critical_threshold;
        
        if reading.value < critical_min || reading.value > critical_max {
            0.1 // Critical condition
        } else if reading.value < min_threshold || reading.value > max_threshold {
            0.5 // Warning condition
        } else {
            // Normal operation - closer to center of range is better
            let center = (sensor.normal_range.0 + sensor.normal_range.1) / 2.0;
            let distance_from_center = ((reading.value - center).abs() / (sensor.normal_range.1 - sensor.normal_range.0)) * 0.4;
            0.9 - distance_from_center
        }
    }

    /// Predict failure
    async fn predict_failure(&self, equipment_id: &str) -> Result<PredictionResult, Box<dyn std::error::Error>> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        
        let failure_probability = rand::random::<f32>() * 0.3 + 0.1; // 0.1 - 0.4
        let time_to_failure = if failure_probability > 0.2 {
            Some(SystemTime::now() + Duration::from_secs((failure_probability * 1000.0) as u64))
        } else {
            None
        };
        
        let recommendations = if failure_probability > 0.3 {
            vec![MaintenanceAction::ImmediateRepair]
        } else if failure_probability > 0.2 {
            vec![MaintenanceAction::ScheduleMaintenance]
        } else {
            vec![MaintenanceAction::ContinueMonitoring]
        };
        
        Ok(PredictionResult {
            equipment_id: equipment_id.to_string(),
            request_id: format!("failure-{}-{}", equipment_id, SystemTime::now().elapsed_since(SystemTime::UNIX_EPOCH)?.as_secs()),
            prediction_type: PredictionType::FailurePrediction,
            confidence_score: rand::random::<f32>() * 0.2 + 0.7,
            predicted_value: Some(failure_probability as f64),
            predicted_time: time_to_failure,
            recommendations,
            risk_assessment: RiskAssessment {
                overall_risk_level: if failure_probability > 0.7 {
                    RiskLevel::Critical
                } else if failure_probability > 0.4 {
                    RiskLevel::High
                } else if failure_probability > 0.2 {
                    RiskLevel::Medium
                } else {
                    RiskLevel::Low
                },
                probability_of_failure: failure_probability,
                potential_impact: ImpactLevel::High,
                estimated_cost_of_failure: failure_probability * 100000.0,
                mitigation_suggestions: vec!["Schedule preventive maintenance".to_string()],
            },
            processing_time_ms: 0.0,
            timestamp: SystemTime::now(),
        })
    }

    /// Estimate remaining useful life
    async fn estimate_remaining_life(&self, equipment_id: &str) -> Result<PredictionResult, Box<dyn std::error::Error>> {
        tokio::time::sleep(Duration::from_millis(75)).await;
        
        let remaining_life_days = rand::random::<u32>() % 500 + 100; // 100 - 600 days
        let confidence = rand::random::<f32>() * 0.2 + 0.7;
        
        Ok(PredictionResult {
            equipment_id: equipment_id.to_string(),
            request_id: format!("life-{}-{}", equipment_id, SystemTime::now().elapsed_since(SystemTime::UNIX_EPOCH)?.as_secs()),
            prediction_type: PredictionType::RemainingLifeEstimation,
            confidence_score: confidence,
            predicted_value: Some(remaining_life_days as f64),
            predicted_time: Some(SystemTime::now() + Duration::from_secs((remaining_life_days as u64) * 86400)),
            recommendations: if remaining_life_days < 200 {
                vec![MaintenanceAction::ScheduleReplacement]
            } else {
                vec![MaintenanceAction::ContinueMonitoring]
            },
            risk_assessment: RiskAssessment {
                overall_risk_level: if remaining_life_days > 400 {
                    RiskLevel::Low
                } else if remaining_life_days > 200 {
                    RiskLevel::Medium
                } else {
                    RiskLevel::High
                },
                probability_of_failure: 1.0 - (remaining_life_days as f32 / 600.0),
                potential_impact: ImpactLevel::Medium,
                estimated_cost_of_failure: 75000.0,
                mitigation_suggestions: vec!["Plan for equipment replacement".to_string()],
            },
            processing_time_ms: 0.0,
            timestamp: SystemTime::now(),
        })
    }

    /// Detect anomalies in sensor data
    async fn detect_anomalies(&self, equipment_id: &str) -> Result<PredictionResult, Box<dyn std::error::Error>> {
        tokio::time::sleep(Duration::from_millis(30)).await;
        
        let anomaly_score = rand::random::<f32>() * 0.8 + 0.1; // 0.1 - 0.9
        
        Ok(PredictionResult {
            equipment_id: equipment_id.to_string(),
            request_id: format!("anomaly-{}-{}", equipment_id, SystemTime::now().elapsed_since(SystemTime::UNIX_EPOCH)?.as_secs()),
            prediction_type: PredictionType::AnomalyDetection,
            confidence_score: rand::random::<f32>() * 0.2 + 0.6,
            predicted_value: Some(anomaly_score as f64),
            predicted_time: None,
            recommendations: if anomaly_score > 0.7 {
                vec![MaintenanceAction::EmergencyShutdown]
            } else if anomaly_score > 0.5 {
                vec![MaintenanceAction::ImmediateRepair]
            } else {
                vec![MaintenanceAction::ContinueMonitoring]
            },
            risk_assessment: RiskAssessment {
                overall_risk_level: if anomaly_score > 0.8 {
                    RiskLevel::Critical
                } else if anomaly_score > 0.6 {
                    RiskLevel::High
                } else if anomaly_score > 0.4 {
                    RiskLevel::Medium
                } else {
                    RiskLevel::Low
                },
                probability_of_failure: anomaly_score,
                potential_impact: ImpactLevel::High,
                estimated_cost_of_failure: anomaly_score * 150000.0,
                mitigation_suggestions: vec!["Investigate sensor readings".to_string()],
            },
            processing_time_ms: 0.0,
            timestamp: SystemTime::now(),
        })
    }

    /// Generate maintenance recommendation
    async fn generate_maintenance_recommendation(&self, equipment_id: &str) -> Result<PredictionResult, Box<dyn std::error::Error>> {
        tokio::time::sleep(Duration::from_millis(60)).await;
        
        let maintenance_priority = rand::random::<u8>() % 10 + 1;
        
        Ok(PredictionResult {
            equipment_id: equipment_id.to_string(),
            request_id: format!("maint-{}-{}", equipment_id, SystemTime::now().elapsed_since(SystemTime::UNIX_EPOCH)?.as_secs()),
            prediction_type: PredictionType::MaintenanceRecommendation,
            confidence_score: rand::random::<f32>() * 0.3 + 0.7,
            predicted_value: Some(maintenance_priority as f64),
            predicted_time: Some(SystemTime::now() + Duration::from_secs((maintenance_priority as u64) * 86400)),
            recommendations: vec![MaintenanceAction::ScheduleInspection],
            risk_assessment: RiskAssessment {
                overall_risk_level: RiskLevel::Medium,
                probability_of_failure: 0.15,
                potential_impact: ImpactLevel::Medium,
                estimated_cost_of_failure: 25000.0,
                mitigation_suggestions: vec!["Routine maintenance inspection".to_string()],
            },
            processing_time_ms: 0.0,
            timestamp: SystemTime::now(),
        })
    }

    /// Check if sensor reading indicates anomaly
    fn is_anomaly_detected(&self, reading: &SensorReading, stream: &SensorDataStream) -> bool {
        // Simplified anomaly detection based on historical data
        let recent_readings = stream.readings.iter().rev().take(10).collect::<Vec<_>>();
        
        if recent_readings.len() < 3 {
            return false;
        }
        
        let mean: f64 = recent_readings.iter().map(|r| r.value).sum::<f64>() / recent_readings.len() as f64;
        let variance: f64 = recent_readings.iter()
            .map(|r| (r.value - mean).powi(2))
            .sum::<f64>() / recent_readings.len() as f64;
        let std_dev = variance.sqrt();
        
        (reading.value - mean).abs() > 2.0 * std_dev
    }

    /// Get equipment ID from sensor ID
    async fn get_equipment_id_from_sensor(&self, sensor_id: &str) -> String {
        let registry = self.equipment_registry.read().await;
        
        for (equipment_id, equipment) in registry.iter() {
            if equipment.sensors.iter().any(|s| s.sensor_id == sensor_id) {
                return equipment_id.clone();
            }
        }
        "unknown".to_string()
    }

    /// Generate mitigation suggestions
    fn generate_mitigation_suggestions(&self, health_score: f32) -> Vec<String> {
        let mut suggestions = Vec::new();
        
        if health_score < 0.3 {
            suggestions.push("Immediate inspection required".to_string());
            suggestions.push("Consider emergency shutdown".to_string());
        } else if health_score < 0.5 {
            suggestions.push("Schedule maintenance within 24 hours".to_string());
            suggestions.push("Increase monitoring frequency".to_string());
        } else if health_score < 0.7 {
            suggestions.push("Schedule maintenance within 1 week".to_string());
        } else if health_score < 0.9 {
            suggestions.push("Routine monitoring sufficient".to_string());
        } else {
            suggestions.push("Equipment operating optimally".to_string());
        }
        
        suggestions
    }

    /// Process prediction result
    async fn process_prediction_result(&self, result: &PredictionResult) {
        let mut alert_manager = self.alert_manager.lock().unwrap();
        
        // Generate alerts for high-risk predictions
        if matches!(result.risk_assessment.overall_risk_level, RiskLevel::High | RiskLevel::Critical) {
            let alert = Alert {
                alert_id: format!("alert-{}-{}", result.equipment_id, result.request_id),
                equipment_id: result.equipment_id.clone(),
                alert_type: AlertType::PredictedFailure,
                severity: result.risk_assessment.overall_risk_level.clone(),
                title: format!("{} Risk Detected", result.prediction_type.as_ref()),
                message: format!("Equipment {} shows high risk level: {:?}", result.equipment_id, result.risk_assessment.overall_risk_level),
                created_at: SystemTime::now(),
                acknowledged: false,
                resolved_at: None,
            };
            
            alert_manager.active_alerts.push(alert);
            alert_manager.alerts_generated += 1;
            
            println!("Generated alert for equipment {}: {:?}", result.equipment_id, result.risk_assessment.overall_risk_level);
        }
    }

    /// Perform routine health assessments
    async fn perform_routine_assessments(&self) {
        let registry = self.equipment_registry.read().await;
        let mut monitor = self.performance_monitor.lock().unwrap();
        
        monitor.equipment_monitored = registry.len() as u32;
        
        // Submit routine assessment requests for all equipment
        for equipment_id in registry.keys() {
            let request = PredictionRequest {
                equipment_id: equipment_id.clone(),
                request_type: PredictionType::HealthAssessment,
                priority: 3, // Lower priority for routine assessments
                created_at: SystemTime::now(),
            };
            
            self.submit_prediction_request(request).await.unwrap();
        }
        
        println!("Submitted routine health assessments for {} equipment units", registry.len());
    }

    /// Get performance statistics
    pub async fn get_performance_stats(&self) -> PerformanceMonitor {
        let monitor = self.performance_monitor.lock().unwrap();
        monitor.clone()
    }

    /// Get active alerts
    pub async fn get_active_alerts(&self) -> Vec<Alert> {
        let alert_manager = self.alert_manager.lock().unwrap();
        alert_manager.active_alerts.clone()
    }
}

/// Create sample equipment unit
pub fn create_sample_equipment(unit_id: &str, equipment_type: EquipmentType) -> EquipmentUnit {
    let sensors = match &equipment_type {
        EquipmentType::Motor => vec![
            SensorUnit {
                sensor_id: format!("{}-temp-001", unit_id),
                sensor_type: SensorType::Temperature,
                location: "Stator".to_string(),
                sampling_rate_hz: 1.0,
                normal_range: (0.0, 80.0),
                warning_threshold: (70.0, 90.0),
                critical_threshold: (80.0, 100.0),
            },
            SensorUnit {
                sensor_id: format!("{}-vib-001", unit_id),
                sensor_type: SensorType::Vibration,
                location: "Bearing".to_string(),
                sampling_rate_hz: 10.0,
                normal_range: (0.0, 5.0),
                warning_threshold: (4.0, 7.0),
                critical_threshold: (6.0, 10.0),
            },
        ],
        EquipmentType::Pump => vec![
            SensorUnit {
                sensor_id: format!("{}-pressure-001", unit_id),
                sensor_type: SensorType::Pressure,
                location: "Outlet".to_string(),
                sampling_rate_hz: 1.0,
                normal_range: (0.0, 10.0),
                warning_threshold: (8.0, 12.0),
                critical_threshold: (10.0, 15.0),
            },
        ],
        _ => vec![SensorUnit {
            sensor_id: format!("{}-temp-001", unit_id),
            sensor_type: SensorType::Temperature,
            location: "Main".to_string(),
            sampling_rate_hz: 1.0,
            normal_range: (0.0, 100.0),
            warning_threshold: (80.0, 120.0),
            critical_threshold: (100.0, 150.0),
        }],
    };

    EquipmentUnit {
        unit_id: unit_id.to_string(),
        equipment_type,
        manufacturer: "Industrial Corp".to_string(),
        model: "XYZ-2000".to_string(),
        installation_date: SystemTime::now() - Duration::from_secs(365 * 24 * 60 * 60), // 1 year ago
        operational_hours: rand::random::<u64>() % 8760 + 1000,
        sensors,
        maintenance_history: Vec::new(),
        operational_parameters: OperationalParameters {
            rated_power_kw: 50.0,
            operating_voltage_v: 480.0,
            operating_current_a: 120.0,
            speed_rpm: 1800.0,
            temperature_max_c: 80.0,
            pressure_max_bar: 10.0,
        },
        condition_status: EquipmentCondition {
            overall_health_score: 0.8,
            predicted_failure_probability: 0.1,
            remaining_useful_life_days: 400,
            risk_level: RiskLevel::Low,
            recommended_actions: vec![MaintenanceAction::ContinueMonitoring],
            last_updated: SystemTime::now(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_predictive_maintenance_engine_creation() {
        let engine = PredictiveMaintenanceEngine::new();
        let stats = engine.get_performance_stats().await;
        assert_eq!(stats.total_predictions, 0);
        assert_eq!(stats.equipment_monitored, 0);
    }

    #[tokio::test]
    async fn test_equipment_registration() {
        let engine = PredictiveMaintenanceEngine::new();
        let equipment = create_sample_equipment("motor-001", EquipmentType::Motor);
        
        let result = engine.register_equipment(equipment).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sensor_reading_submission() {
        let engine = PredictiveMaintenanceEngine::new();
        let equipment = create_sample_equipment("motor-001", EquipmentType::Motor);
        
        // Register equipment first
        engine.register_equipment(equipment).await.unwrap();
        
        let reading = SensorReading {
            sensor_id: "motor-001-temp-001".to_string(),
            sensor_type: SensorType::Temperature,
            value: 65.0,
            unit: "°C".to_string(),
            timestamp: SystemTime::now(),
            quality: SensorQuality {
                accuracy: 0.95,
                reliability: 0.98,
                calibration_date: SystemTime::now() - Duration::from_secs(30 * 24 * 60 * 60), // 30 days ago
                error_code: None,
            },
            location: None,
        };
        
        let result = engine.submit_sensor_reading(reading).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_health_score_calculation() {
        // This test would require setting up actual sensor data
        // For now, just test the basic structure
        assert_eq!(1.0, 1.0);
    }

    #[test]
    fn test_anomaly_detection() {
        // Test anomaly detection logic
        let reading = SensorReading {
            sensor_id: "test-sensor".to_string(),
            sensor_type: SensorType::Temperature,
            value: 150.0, // High value that should trigger anomaly
            unit: "°C".to_string(),
            timestamp: SystemTime::now(),
            quality: SensorQuality {
                accuracy: 1.0,
                reliability: 1.0,
                calibration_date: SystemTime::now(),
                error_code: None,
            },
            location: None,
        };
        
        // This would need more complex setup to test properly
        // For now, just verify the structure is correct
        assert!(reading.value > 0.0);
    }
}