//! Smart City Edge Computing Demonstrations
//! MultiOS Edge Computing Demonstrations

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant, SystemTime};
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use std::sync::{Arc, Mutex};

/// Smart city infrastructure types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InfrastructureType {
    TrafficLight,
    SmartParking,
    EnvironmentalSensor,
    PublicTransport,
    StreetLighting,
    WasteManagement,
    EmergencySystem,
    WaterQuality,
    AirQuality,
    NoiseMonitoring,
    SmartBuilding,
    PublicWiFi,
    SecurityCamera,
    PedestrianSensor,
    WeatherStation,
}

/// Smart city sensor data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartCitySensor {
    pub sensor_id: String,
    pub infrastructure_id: String,
    pub sensor_type: SensorType,
    pub location: (f64, f64), // latitude, longitude
    pub value: f32,
    pub unit: String,
    pub timestamp: SystemTime,
    pub battery_level: Option<f32>,
    pub signal_strength: Option<f32>,
}

/// Sensor types for smart city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SensorType {
    TrafficCount,
    VehicleSpeed,
    ParkingOccupancy,
    AirQuality,
    NoiseLevel,
    Temperature,
    Humidity,
    WindSpeed,
    SolarIrradiance,
    WaterLevel,
    WaterQuality,
    PedestrianCount,
    EmergencyAlarm,
    EnergyConsumption,
    DoorSensor,
    MotionDetector,
}

/// Smart city infrastructure unit
#[derive(Debug, Clone)]
pub struct SmartCityInfrastructure {
    pub infrastructure_id: String,
    pub infrastructure_type: InfrastructureType,
    pub location: (f64, f64),
    pub zone: String,
    pub sensors: Vec<SmartCitySensor>,
    pub status: InfrastructureStatus,
    pub last_maintenance: SystemTime,
    pub operational_hours: u64,
    pub capacity: Option<u32>,
    pub current_usage: u32,
}

/// Infrastructure status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InfrastructureStatus {
    Operational,
    Maintenance,
    Fault,
    Offline,
    OverCapacity,
}

/// Traffic management system
#[derive(Debug)]
pub struct TrafficManagementSystem {
    pub traffic_lights: HashMap<String, TrafficLightController>,
    pub traffic_sensors: Vec<TrafficSensor>,
    pub intersections: Vec<Intersection>,
    pub traffic_optimization_engine: Arc<Mutex<TrafficOptimizationEngine>>,
    pub performance_monitor: Arc<Mutex<TrafficPerformanceMonitor>>,
}

/// Traffic light controller
#[derive(Debug, Clone)]
pub struct TrafficLightController {
    pub light_id: String,
    pub intersection_id: String,
    pub location: (f64, f64),
    pub current_phase: TrafficLightPhase,
    pub phase_timing: PhaseTiming,
    pub pedestrian_detection: bool,
    pub emergency_override: bool,
    pub countdown_display: Option<u8>,
}

/// Traffic light phases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrafficLightPhase {
    Red,
    Yellow,
    Green,
    PedestrianGreen,
    AllRed,
    FlashingRed,
    FlashingYellow,
}

/// Traffic light phase timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseTiming {
    pub red_duration: Duration,
    pub yellow_duration: Duration,
    pub green_duration: Duration,
    pub pedestrian_green_duration: Duration,
    pub all_red_duration: Duration,
}

/// Traffic sensor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSensor {
    pub sensor_id: String,
    pub location: (f64, f64),
    pub road_segment_id: String,
    pub vehicle_count: u32,
    pub average_speed: f32,
    pub congestion_level: CongestionLevel,
    pub accident_detected: bool,
    pub timestamp: SystemTime,
}

/// Congestion levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CongestionLevel {
    FreeFlow,
    Light,
    Moderate,
    Heavy,
    Gridlock,
}

/// Intersection management
#[derive(Debug, Clone)]
pub struct Intersection {
    pub intersection_id: String,
    pub location: (f64, f64),
    pub traffic_lights: Vec<String>,
    pub connected_roads: Vec<RoadSegment>,
    pub pedestrian_crossings: Vec<PedestrianCrossing>,
    pub emergency_vehicle_priority: bool,
    pub adaptive_timing: bool,
}

/// Road segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadSegment {
    pub segment_id: String,
    pub start_location: (f64, f64),
    pub end_location: (f64, f64),
    pub road_type: RoadType,
    pub speed_limit: f32,
    pub lanes: u8,
    pub current_speed: f32,
    pub vehicle_count: u32,
}

/// Road types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoadType {
    Highway,
    Arterial,
    Collector,
    Local,
    Residential,
    Industrial,
}

/// Pedestrian crossing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PedestrianCrossing {
    pub crossing_id: String,
    pub location: (f64, f64),
    pub has_button: bool,
    pub has_audio: bool,
    pub pedestrian_count: u32,
    pub waiting_time: Duration,
}

/// Traffic optimization engine
#[derive(Debug)]
pub struct TrafficOptimizationEngine {
    pub optimization_algorithm: OptimizationAlgorithm,
    pub response_time_target_ms: u32,
    pub historical_data: HashMap<String, Vec<TrafficPattern>>,
    pub current_scenarios: Vec<TrafficScenario>,
}

/// Traffic optimization algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OptimizationAlgorithm {
    FixedTiming,
    Actuated,
    Adaptive,
    Predictive,
    MachineLearning,
}

/// Traffic pattern data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficPattern {
    pub timestamp: SystemTime,
    pub vehicle_count: u32,
    pub average_speed: f32,
    pub congestion_level: CongestionLevel,
    pub weather_condition: WeatherCondition,
}

/// Traffic scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficScenario {
    pub scenario_id: String,
    pub scenario_type: ScenarioType,
    pub affected_area: BoundingBox,
    pub severity: ScenarioSeverity,
    pub estimated_duration: Duration,
    pub recommendations: Vec<String>,
}

/// Scenario types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScenarioType {
    RushHour,
    SpecialEvent,
    Accident,
    RoadClosure,
    WeatherEmergency,
    PublicTransportStrike,
}

/// Scenario severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScenarioSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Weather conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
    Windy,
    Stormy,
}

/// Bounding box for geographic areas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Environmental monitoring system
#[derive(Debug)]
pub struct EnvironmentalMonitoringSystem {
    pub air_quality_stations: HashMap<String, AirQualityStation>,
    pub noise_monitoring_stations: HashMap<String, NoiseMonitoringStation>,
    pub weather_stations: HashMap<String, WeatherStation>,
    pub water_quality_stations: HashMap<String, WaterQualityStation>,
    pub alert_system: Arc<Mutex<EnvironmentalAlertSystem>>,
}

/// Air quality station
#[derive(Debug, Clone)]
pub struct AirQualityStation {
    pub station_id: String,
    pub location: (f64, f64),
    pub pm25: f32,
    pub pm10: f32,
    pub no2: f32,
    pub so2: f32,
    pub o3: f32,
    pub co: f32,
    pub air_quality_index: u32,
    pub air_quality_level: AirQualityLevel,
}

/// Air quality levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AirQualityLevel {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Noise monitoring station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseMonitoringStation {
    pub station_id: String,
    pub location: (f64, f64),
    pub current_db: f32,
    pub average_db: f32,
    pub max_db: f32,
    pub noise_level: NoiseLevel,
    pub time_of_day: TimeOfDay,
}

/// Noise levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NoiseLevel {
    Quiet,
    Moderate,
    Loud,
    VeryLoud,
    Disturbing,
}

/// Time of day classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TimeOfDay {
    Night,
    EarlyMorning,
    Morning,
    Midday,
    Afternoon,
    Evening,
    LateEvening,
}

/// Weather station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherStation {
    pub station_id: String,
    pub location: (f64, f64),
    pub temperature: f32,
    pub humidity: f32,
    pub wind_speed: f32,
    pub wind_direction: f32,
    pub pressure: f32,
    pub precipitation: f32,
    pub visibility: f32,
    pub uv_index: u32,
}

/// Water quality station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterQualityStation {
    pub station_id: String,
    pub location: (f64, f64),
    pub ph_level: f32,
    pub dissolved_oxygen: f32,
    pub turbidity: f32,
    pub conductivity: f32,
    pub temperature: f32,
    pub water_quality: WaterQuality,
}

/// Water quality levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WaterQuality {
    Excellent,
    Good,
    Fair,
    Poor,
    Unsafe,
}

/// Environmental alert system
#[derive(Debug, Clone)]
pub struct EnvironmentalAlertSystem {
    pub active_alerts: Vec<EnvironmentalAlert>,
    pub alert_history: Vec<EnvironmentalAlert>,
    pub notification_rules: Vec<NotificationRule>,
}

/// Environmental alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalAlert {
    pub alert_id: String,
    pub alert_type: EnvironmentalAlertType,
    pub severity: AlertSeverity,
    pub affected_area: BoundingBox,
    pub message: String,
    pub recommendations: Vec<String>,
    pub created_at: SystemTime,
    pub expires_at: SystemTime,
}

/// Environmental alert types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EnvironmentalAlertType {
    PoorAirQuality,
    HighNoise,
    ExtremeWeather,
    WaterContamination,
    ChemicalSpill,
    RadiationAlert,
}

/// Alert severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlertSeverity {
    Info,
    Warning,
    Moderate,
    Severe,
    Emergency,
}

/// Notification rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRule {
    pub rule_id: String,
    pub alert_types: Vec<EnvironmentalAlertType>,
    pub severity_threshold: AlertSeverity,
    pub notification_channels: Vec<NotificationChannel>,
}

/// Notification channels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationChannel {
    SMS,
    Email,
    MobileApp,
    PublicDisplay,
    SocialMedia,
    EmergencyBroadcast,
}

/// Smart parking system
#[derive(Debug)]
pub struct SmartParkingSystem {
    pub parking_sensors: HashMap<String, ParkingSensor>,
    pub parking_areas: HashMap<String, ParkingArea>,
    pub payment_stations: HashMap<String, PaymentStation>,
    pub mobile_app_interface: Arc<Mutex<ParkingMobileInterface>>,
}

/// Parking sensor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSensor {
    pub sensor_id: String,
    pub location: (f64, f64),
    pub parking_space_id: String,
    pub area_id: String,
    pub occupied: bool,
    pub vehicle_type: Option<VehicleType>,
    pub parking_duration: Option<Duration>,
    pub payment_status: PaymentStatus,
}

/// Vehicle types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
    Bus,
    ElectricVehicle,
    Disabled,
}

/// Parking area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingArea {
    pub area_id: String,
    pub name: String,
    pub location: (f64, f64),
    pub total_spaces: u32,
    pub occupied_spaces: u32,
    pub hourly_rate: f32,
    pub max_duration_hours: Option<u32>,
    pub parking_type: ParkingType,
}

/// Parking types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParkingType {
    Street,
    Garage,
    Lot,
    Metered,
    Free,
    Reserved,
    EVCharging,
}

/// Payment station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStation {
    pub station_id: String,
    pub location: (f64, f64),
    pub status: PaymentStationStatus,
    pub accepted_methods: Vec<PaymentMethod>,
    pub current_transactions: Vec<ParkingTransaction>,
}

/// Payment station status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PaymentStationStatus {
    Operational,
    Maintenance,
    Fault,
    Offline,
}

/// Payment methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    MobilePayment,
    RFID,
    QRCode,
}

/// Parking transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingTransaction {
    pub transaction_id: String,
    pub vehicle_id: String,
    pub space_id: String,
    pub start_time: SystemTime,
    pub end_time: Option<SystemTime>,
    pub duration: Option<Duration>,
    pub amount: f32,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
}

/// Transaction status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransactionStatus {
    Active,
    Completed,
    Expired,
    Overpaid,
    Refunded,
}

/// Parking mobile interface
#[derive(Debug, Clone)]
pub struct ParkingMobileInterface {
    pub active_users: u32,
    pub search_requests: u32,
    pub reservations: u32,
    pub payments_processed: u32,
}

/// Waste management system
#[derive(Debug)]
pub struct WasteManagementSystem {
    pub waste_bins: HashMap<String, SmartWasteBin>,
    pub collection_routes: HashMap<String, CollectionRoute>,
    pub fleet_management: Arc<Mutex<FleetManagement>>,
    pub fill_level_alerts: Vec<FillLevelAlert>,
}

/// Smart waste bin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartWasteBin {
    pub bin_id: String,
    pub location: (f64, f64),
    pub bin_type: WasteBinType,
    pub fill_level: u8, // 0-100%
    pub last_collection: SystemTime,
    pub temperature: Option<f32>,
    pub odor_level: Option<f32>,
    pub compacting_status: CompactingStatus,
}

/// Waste bin types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WasteBinType {
    General,
    Recycling,
    Organic,
    Glass,
    Plastic,
    Paper,
    Metal,
    Electronic,
}

/// Compacting status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompactingStatus {
    Idle,
    Compacting,
    Full,
    Error,
}

/// Collection route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionRoute {
    pub route_id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub scheduled_start: SystemTime,
    pub estimated_completion: SystemTime,
    pub bins_on_route: Vec<String>,
    pub route_optimization: RouteOptimization,
}

/// Route optimization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOptimization {
    pub algorithm: OptimizationAlgorithm,
    pub fuel_efficiency_score: f32,
    pub time_efficiency_score: f32,
    pub traffic_considerations: bool,
    pub fuel_cost_estimate: f32,
}

/// Fleet management
#[derive(Debug, Clone)]
pub struct FleetManagement {
    pub vehicles: HashMap<String, CollectionVehicle>,
    pub drivers: HashMap<String, Driver>,
    pub fuel_consumption: f32,
    pub maintenance_schedules: HashMap<String, MaintenanceSchedule>,
}

/// Collection vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionVehicle {
    pub vehicle_id: String,
    pub vehicle_type: CollectionVehicleType,
    pub driver_id: String,
    pub current_location: (f64, f64),
    pub fuel_level: f32,
    pub status: VehicleStatus,
    pub route_id: Option<String>,
}

/// Collection vehicle types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CollectionVehicleType {
    GarbageTruck,
    RecyclingTruck,
    OrganicWasteTruck,
    HazardousWasteTruck,
}

/// Vehicle status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VehicleStatus {
    Idle,
    OnRoute,
    Loading,
    Unloading,
    Maintenance,
    Fault,
}

/// Driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub driver_id: String,
    pub name: String,
    pub license_number: String,
    pub certifications: Vec<String>,
    pub current_vehicle: Option<String>,
    pub hours_worked_today: f32,
    pub performance_score: f32,
}

/// Maintenance schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub vehicle_id: String,
    pub maintenance_type: MaintenanceType,
    pub scheduled_date: SystemTime,
    pub estimated_cost: f32,
    pub estimated_duration: Duration,
    pub priority: MaintenancePriority,
}

/// Maintenance types for vehicles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MaintenanceType {
    Regular,
    OilChange,
    TireRotation,
    BrakeInspection,
    EngineDiagnostic,
    HydraulicSystem,
    ElectricalSystem,
}

/// Maintenance priority
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Fill level alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillLevelAlert {
    pub alert_id: String,
    pub bin_id: String,
    pub fill_level: u8,
    pub alert_type: FillLevelAlertType,
    pub created_at: SystemTime,
    pub resolved_at: Option<SystemTime>,
}

/// Fill level alert types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FillLevelAlertType {
    ReadyForCollection,
    OverCapacity,
    OffensiveOdor,
    TemperatureHigh,
}

/// Smart city performance monitoring
#[derive(Debug, Clone)]
pub struct SmartCityPerformanceMonitor {
    pub total_infrastructure: u32,
    pub operational_infrastructure: u32,
    pub data_throughput_mbps: f64,
    pub response_time_ms: f64,
    pub accuracy_percentage: f32,
    pub energy_efficiency: f32,
    pub cost_savings_usd: f64,
    pub citizen_satisfaction: f32,
}

/// Create sample smart city infrastructure
pub fn create_sample_infrastructure() -> Vec<SmartCityInfrastructure> {
    let mut infrastructure = Vec::new();
    
    // Traffic light
    infrastructure.push(SmartCityInfrastructure {
        infrastructure_id: "traffic-light-001".to_string(),
        infrastructure_type: InfrastructureType::TrafficLight,
        location: (37.7749, -122.4194),
        zone: "Downtown".to_string(),
        sensors: vec![SmartCitySensor {
            sensor_id: "traffic-sensor-001".to_string(),
            infrastructure_id: "traffic-light-001".to_string(),
            sensor_type: SensorType::VehicleSpeed,
            location: (37.7749, -122.4194),
            value: 35.0,
            unit: "km/h".to_string(),
            timestamp: SystemTime::now(),
            battery_level: Some(85.0),
            signal_strength: Some(90.0),
        }],
        status: InfrastructureStatus::Operational,
        last_maintenance: SystemTime::now() - Duration::from_secs(30 * 24 * 60 * 60), // 30 days ago
        operational_hours: 8760, // 1 year in hours
        capacity: Some(1),
        current_usage: 1,
    });
    
    // Parking sensor
    infrastructure.push(SmartCityInfrastructure {
        infrastructure_id: "parking-sensor-001".to_string(),
        infrastructure_type: InfrastructureType::SmartParking,
        location: (37.7849, -122.4094),
        zone: "Financial District".to_string(),
        sensors: vec![SmartCitySensor {
            sensor_id: "parking-occ-001".to_string(),
            infrastructure_id: "parking-sensor-001".to_string(),
            sensor_type: SensorType::ParkingOccupancy,
            location: (37.7849, -122.4094),
            value: 75.0,
            unit: "%".to_string(),
            timestamp: SystemTime::now(),
            battery_level: Some(92.0),
            signal_strength: Some(88.0),
        }],
        status: InfrastructureStatus::Operational,
        last_maintenance: SystemTime::now() - Duration::from_secs(60 * 24 * 60 * 60), // 60 days ago
        operational_hours: 26280, // 3 years in hours
        capacity: Some(200),
        current_usage: 150,
    });
    
    // Environmental sensor
    infrastructure.push(SmartCityInfrastructure {
        infrastructure_id: "air-quality-001".to_string(),
        infrastructure_type: InfrastructureType::AirQuality,
        location: (37.7649, -122.4294),
        zone: "Mission District".to_string(),
        sensors: vec![
            SmartCitySensor {
                sensor_id: "aqi-sensor-001".to_string(),
                infrastructure_id: "air-quality-001".to_string(),
                sensor_type: SensorType::AirQuality,
                location: (37.7649, -122.4294),
                value: 65.0,
                unit: "AQI".to_string(),
                timestamp: SystemTime::now(),
                battery_level: Some(78.0),
                signal_strength: Some(92.0),
            },
            SmartCitySensor {
                sensor_id: "noise-sensor-001".to_string(),
                infrastructure_id: "air-quality-001".to_string(),
                sensor_type: SensorType::NoiseLevel,
                location: (37.7649, -122.4294),
                value: 72.0,
                unit: "dB".to_string(),
                timestamp: SystemTime::now(),
                battery_level: Some(78.0),
                signal_strength: Some(92.0),
            },
        ],
        status: InfrastructureStatus::Operational,
        last_maintenance: SystemTime::now() - Duration::from_secs(45 * 24 * 60 * 60), // 45 days ago
        operational_hours: 17520, // 2 years in hours
        capacity: Some(1),
        current_usage: 1,
    });
    
    infrastructure
}

/// Smart city orchestrator
pub struct SmartCityOrchestrator {
    pub traffic_system: Arc<Mutex<TrafficManagementSystem>>,
    pub environmental_system: Arc<Mutex<EnvironmentalMonitoringSystem>>,
    pub parking_system: Arc<Mutex<SmartParkingSystem>>,
    pub waste_system: Arc<Mutex<WasteManagementSystem>>,
    pub performance_monitor: Arc<Mutex<SmartCityPerformanceMonitor>>,
    pub data_processor: Arc<Mutex<DataProcessor>>,
}

/// Data processor for smart city analytics
#[derive(Debug)]
pub struct DataProcessor {
    pub real_time_analytics: RealTimeAnalytics,
    pub predictive_models: HashMap<String, PredictiveModel>,
    pub optimization_engine: OptimizationEngine,
}

/// Real-time analytics
#[derive(Debug, Clone)]
pub struct RealTimeAnalytics {
    pub metrics: SmartCityMetrics,
    pub alerts: Vec<RealTimeAlert>,
    pub trends: HashMap<String, TrendAnalysis>,
}

/// Smart city metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartCityMetrics {
    pub traffic_efficiency: f32,
    pub environmental_quality_index: f32,
    pub parking_availability: f32,
    pub waste_collection_efficiency: f32,
    pub citizen_engagement: f32,
    pub operational_cost_per_day: f64,
}

/// Real-time alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealTimeAlert {
    pub alert_id: String,
    pub category: AlertCategory,
    pub severity: AlertSeverity,
    pub location: (f64, f64),
    pub message: String,
    pub timestamp: SystemTime,
    pub action_required: bool,
}

/// Alert categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlertCategory {
    Traffic,
    Environment,
    Safety,
    Infrastructure,
    Emergency,
}

/// Trend analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub metric_name: String,
    pub trend_direction: TrendDirection,
    pub trend_strength: f32,
    pub confidence: f32,
    pub forecast_period_days: u32,
}

/// Trend directions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    Volatile,
}

/// Predictive model
#[derive(Debug, Clone)]
pub struct PredictiveModel {
    pub model_id: String,
    pub model_type: ModelType,
    pub accuracy: f32,
    pub training_data_size: usize,
    pub last_updated: SystemTime,
    pub feature_importance: HashMap<String, f32>,
}

/// Model types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ModelType {
    TrafficPrediction,
    DemandForecasting,
    MaintenancePrediction,
    EnergyOptimization,
    CitizenBehavior,
}

/// Optimization engine
#[derive(Debug)]
pub struct OptimizationEngine {
    pub algorithms: HashMap<String, OptimizationAlgorithm>,
    pub performance_metrics: OptimizationMetrics,
}

/// Optimization metrics
#[derive(Debug, Clone)]
pub struct OptimizationMetrics {
    pub cost_reduction_percentage: f32,
    pub efficiency_improvement: f32,
    pub user_satisfaction: f32,
    pub environmental_impact: f32,
}

impl SmartCityOrchestrator {
    pub fn new() -> Self {
        Self {
            traffic_system: Arc::new(Mutex::new(TrafficManagementSystem {
                traffic_lights: HashMap::new(),
                traffic_sensors: Vec::new(),
                intersections: Vec::new(),
                traffic_optimization_engine: Arc::new(Mutex::new(TrafficOptimizationEngine {
                    optimization_algorithm: OptimizationAlgorithm::MachineLearning,
                    response_time_target_ms: 100,
                    historical_data: HashMap::new(),
                    current_scenarios: Vec::new(),
                })),
                performance_monitor: Arc::new(Mutex::new(TrafficPerformanceMonitor::new())),
            })),
            environmental_system: Arc::new(Mutex::new(EnvironmentalMonitoringSystem {
                air_quality_stations: HashMap::new(),
                noise_monitoring_stations: HashMap::new(),
                weather_stations: HashMap::new(),
                water_quality_stations: HashMap::new(),
                alert_system: Arc::new(Mutex::new(EnvironmentalAlertSystem {
                    active_alerts: Vec::new(),
                    alert_history: Vec::new(),
                    notification_rules: Vec::new(),
                })),
            })),
            parking_system: Arc::new(Mutex::new(SmartParkingSystem {
                parking_sensors: HashMap::new(),
                parking_areas: HashMap::new(),
                payment_stations: HashMap::new(),
                mobile_app_interface: Arc::new(Mutex::new(ParkingMobileInterface {
                    active_users: 0,
                    search_requests: 0,
                    reservations: 0,
                    payments_processed: 0,
                })),
            })),
            waste_system: Arc::new(Mutex::new(WasteManagementSystem {
                waste_bins: HashMap::new(),
                collection_routes: HashMap::new(),
                fleet_management: Arc::new(Mutex::new(FleetManagement {
                    vehicles: HashMap::new(),
                    drivers: HashMap::new(),
                    fuel_consumption: 0.0,
                    maintenance_schedules: HashMap::new(),
                })),
                fill_level_alerts: Vec::new(),
            })),
            performance_monitor: Arc::new(Mutex::new(SmartCityPerformanceMonitor {
                total_infrastructure: 0,
                operational_infrastructure: 0,
                data_throughput_mbps: 0.0,
                response_time_ms: 0.0,
                accuracy_percentage: 95.0,
                energy_efficiency: 85.0,
                cost_savings_usd: 0.0,
                citizen_satisfaction: 88.0,
            })),
            data_processor: Arc::new(Mutex::new(DataProcessor {
                real_time_analytics: RealTimeAnalytics {
                    metrics: SmartCityMetrics {
                        traffic_efficiency: 0.75,
                        environmental_quality_index: 0.82,
                        parking_availability: 0.68,
                        waste_collection_efficiency: 0.91,
                        citizen_engagement: 0.73,
                        operational_cost_per_day: 50000.0,
                    },
                    alerts: Vec::new(),
                    trends: HashMap::new(),
                },
                predictive_models: HashMap::new(),
                optimization_engine: OptimizationEngine {
                    algorithms: HashMap::new(),
                    performance_metrics: OptimizationMetrics {
                        cost_reduction_percentage: 15.0,
                        efficiency_improvement: 22.0,
                        user_satisfaction: 87.0,
                        environmental_impact: -0.12, // Negative means improvement
                    },
                },
            })),
        }
    }

    /// Initialize smart city systems with sample data
    pub async fn initialize_systems(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!("Initializing Smart City Edge Computing Systems...");
        
        // Initialize traffic system
        {
            let traffic = self.traffic_system.lock().unwrap();
            
            // Create sample traffic light
            let traffic_light = TrafficLightController {
                light_id: "tl-001".to_string(),
                intersection_id: "int-001".to_string(),
                location: (37.7749, -122.4194),
                current_phase: TrafficLightPhase::Green,
                phase_timing: PhaseTiming {
                    red_duration: Duration::from_secs(60),
                    yellow_duration: Duration::from_secs(3),
                    green_duration: Duration::from_secs(45),
                    pedestrian_green_duration: Duration::from_secs(20),
                    all_red_duration: Duration::from_secs(2),
                },
                pedestrian_detection: true,
                emergency_override: false,
                countdown_display: Some(15),
            };
            
            let mut traffic_lights = traffic.traffic_lights.clone();
            traffic_lights.insert(traffic_light.light_id.clone(), traffic_light);
        }
        
        // Initialize environmental monitoring
        {
            let mut env = self.environmental_system.lock().unwrap();
            
            // Create air quality station
            let air_station = AirQualityStation {
                station_id: "aq-001".to_string(),
                location: (37.7749, -122.4194),
                pm25: 25.0,
                pm10: 45.0,
                no2: 30.0,
                so2: 8.0,
                o3: 60.0,
                co: 2.0,
                air_quality_index: 65,
                air_quality_level: AirQualityLevel::Good,
            };
            
            env.air_quality_stations.insert(air_station.station_id.clone(), air_station);
        }
        
        // Initialize parking system
        {
            let mut parking = self.parking_system.lock().unwrap();
            
            // Create parking area
            let parking_area = ParkingArea {
                area_id: "pa-001".to_string(),
                name: "Downtown Garage".to_string(),
                location: (37.7849, -122.4094),
                total_spaces: 200,
                occupied_spaces: 150,
                hourly_rate: 4.50,
                max_duration_hours: Some(24),
                parking_type: ParkingType::Garage,
            };
            
            parking.parking_areas.insert(parking_area.area_id.clone(), parking_area);
        }
        
        // Initialize waste management
        {
            let mut waste = self.waste_system.lock().unwrap();
            
            // Create smart waste bin
            let waste_bin = SmartWasteBin {
                bin_id: "wb-001".to_string(),
                location: (37.7649, -122.4294),
                bin_type: WasteBinType::General,
                fill_level: 75,
                last_collection: SystemTime::now() - Duration::from_secs(48 * 60 * 60), // 2 days ago
                temperature: Some(22.0),
                odor_level: Some(3.0),
                compacting_status: CompactingStatus::Idle,
            };
            
            waste.waste_bins.insert(waste_bin.bin_id.clone(), waste_bin);
        }
        
        println!("Smart City Systems initialized successfully");
        Ok(())
    }

    /// Process real-time data from all systems
    pub async fn process_real_time_data(&self) {
        println!("Starting real-time data processing...");
        
        loop {
            // Simulate processing data from all systems
            self.process_traffic_data().await;
            self.process_environmental_data().await;
            self.process_parking_data().await;
            self.process_waste_data().await;
            
            // Update performance metrics
            self.update_performance_metrics().await;
            
            // Process real-time analytics
            self.process_analytics().await;
            
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }

    /// Process traffic system data
    async fn process_traffic_data(&self) {
        let traffic = self.traffic_system.lock().unwrap();
        
        // Simulate traffic optimization
        for (light_id, light) in &traffic.traffic_lights {
            // Simulate adjusting timing based on traffic conditions
            if rand::random::<f32>() > 0.8 {
                println!("Optimizing traffic light {} timing", light_id);
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    }

    /// Process environmental monitoring data
    async fn process_environmental_data(&self) {
        let env = self.environmental_system.lock().unwrap();
        
        // Simulate air quality monitoring
        for (station_id, station) in &env.air_quality_stations {
            if station.air_quality_level == AirQualityLevel::Unhealthy || station.air_quality_level == AirQualityLevel::VeryUnhealthy {
                println!("Air quality alert for station {}", station_id);
            }
        }
    }

    /// Process parking system data
    async fn process_parking_data(&self) {
        let parking = self.parking_system.lock().unwrap();
        
        // Simulate parking availability updates
        for (area_id, area) in &parking.parking_areas {
            let availability = (1.0 - area.occupied_spaces as f32 / area.total_spaces as f32) * 100.0;
            if availability < 20.0 {
                println!("Low parking availability in area {}: {:.1}%", area_id, availability);
            }
        }
    }

    /// Process waste management data
    async fn process_waste_data(&self) {
        let waste = self.waste_system.lock().unwrap();
        
        // Simulate waste collection optimization
        for (bin_id, bin) in &waste.waste_bins {
            if bin.fill_level > 80 {
                println!("Waste bin {} needs collection: {}% full", bin_id, bin.fill_level);
            }
        }
    }

    /// Update system performance metrics
    async fn update_performance_metrics(&self) {
        let mut monitor = self.performance_monitor.lock().unwrap();
        
        // Simulate metric updates
        monitor.data_throughput_mbps = rand::random::<f64>() * 100.0 + 50.0;
        monitor.response_time_ms = rand::random::<f64>() * 50.0 + 25.0;
        
        // Calculate operational percentage
        let operational_percentage = monitor.operational_infrastructure as f64 / monitor.total_infrastructure as f64 * 100.0;
        monitor.cost_savings_usd += 100.0; // Simulate daily savings
    }

    /// Process real-time analytics
    async fn process_analytics(&self) {
        let mut processor = self.data_processor.lock().unwrap();
        
        // Update metrics
        processor.real_time_analytics.metrics.traffic_efficiency = 
            rand::random::<f32>() * 0.2 + 0.7; // 0.7 - 0.9
        
        // Simulate alert generation
        if rand::random::<f32>() > 0.9 {
            let alert = RealTimeAlert {
                alert_id: format!("alert-{}", rand::random::<u32>()),
                category: AlertCategory::Traffic,
                severity: AlertSeverity::Warning,
                location: (37.7749, -122.4194),
                message: "Traffic congestion detected on main avenue".to_string(),
                timestamp: SystemTime::now(),
                action_required: true,
            };
            
            processor.real_time_analytics.alerts.push(alert);
            
            // Keep only recent alerts
            if processor.real_time_analytics.alerts.len() > 100 {
                processor.real_time_analytics.alerts.remove(0);
            }
        }
        
        println!("Processed real-time analytics - {} alerts active", 
                 processor.real_time_analytics.alerts.len());
    }

    /// Get system performance report
    pub async fn get_performance_report(&self) -> SmartCityPerformanceMonitor {
        self.performance_monitor.lock().unwrap().clone()
    }

    /// Generate smart city dashboard data
    pub async fn generate_dashboard_data(&self) -> DashboardData {
        let traffic = self.traffic_system.lock().unwrap();
        let env = self.environmental_system.lock().unwrap();
        let parking = self.parking_system.lock().unwrap();
        let waste = self.waste_system.lock().unwrap();
        let monitor = self.performance_monitor.lock().unwrap();
        
        DashboardData {
            traffic_lights_operational: traffic.traffic_lights.len() as u32,
            traffic_lights_total: 100, // Mock total
            air_quality_stations_active: env.air_quality_stations.len() as u32,
            parking_spaces_occupied: parking.parking_areas.values().map(|a| a.occupied_spaces).sum(),
            parking_spaces_total: parking.parking_areas.values().map(|a| a.total_spaces).sum(),
            waste_bins_need_collection: waste.waste_bins.values().filter(|b| b.fill_level > 80).count() as u32,
            waste_bins_total: waste.waste_bins.len() as u32,
            overall_system_efficiency: (monitor.energy_efficiency + monitor.accuracy_percentage) / 2.0,
            daily_cost_savings: monitor.cost_savings_usd,
            citizen_satisfaction: monitor.citizen_satisfaction,
            real_time_alerts: self.data_processor.lock().unwrap().real_time_analytics.alerts.len() as u32,
            data_throughput_mbps: monitor.data_throughput_mbps,
        }
    }
}

/// Dashboard data for visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub traffic_lights_operational: u32,
    pub traffic_lights_total: u32,
    pub air_quality_stations_active: u32,
    pub parking_spaces_occupied: u32,
    pub parking_spaces_total: u32,
    pub waste_bins_need_collection: u32,
    pub waste_bins_total: u32,
    pub overall_system_efficiency: f32,
    pub daily_cost_savings: f64,
    pub citizen_satisfaction: f32,
    pub real_time_alerts: u32,
    pub data_throughput_mbps: f64,
}

/// Traffic performance monitor
#[derive(Debug, Clone)]
pub struct TrafficPerformanceMonitor {
    pub average_delay_seconds: f32,
    pub throughput_vehicles_per_hour: f32,
    pub intersection_efficiency: f32,
    pub fuel_efficiency_improvement: f32,
    pub emissions_reduction: f32,
}

impl TrafficPerformanceMonitor {
    pub fn new() -> Self {
        Self {
            average_delay_seconds: 25.0,
            throughput_vehicles_per_hour: 1200.0,
            intersection_efficiency: 0.85,
            fuel_efficiency_improvement: 0.15,
            emissions_reduction: 0.20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_city_infrastructure_creation() {
        let infrastructure = create_sample_infrastructure();
        assert_eq!(infrastructure.len(), 3);
        assert!(infrastructure.iter().all(|i| !i.sensors.is_empty()));
    }

    #[test]
    fn test_traffic_light_phases() {
        let traffic_light = TrafficLightController {
            light_id: "test-light".to_string(),
            intersection_id: "test-intersection".to_string(),
            location: (0.0, 0.0),
            current_phase: TrafficLightPhase::Green,
            phase_timing: PhaseTiming {
                red_duration: Duration::from_secs(60),
                yellow_duration: Duration::from_secs(3),
                green_duration: Duration::from_secs(45),
                pedestrian_green_duration: Duration::from_secs(20),
                all_red_duration: Duration::from_secs(2),
            },
            pedestrian_detection: false,
            emergency_override: false,
            countdown_display: None,
        };
        
        assert_eq!(traffic_light.current_phase, TrafficLightPhase::Green);
        assert_eq!(traffic_light.phase_timing.green_duration, Duration::from_secs(45));
    }

    #[test]
    fn test_air_quality_levels() {
        let station = AirQualityStation {
            station_id: "test-station".to_string(),
            location: (0.0, 0.0),
            pm25: 15.0,
            pm10: 25.0,
            no2: 20.0,
            so2: 5.0,
            o3: 40.0,
            co: 1.0,
            air_quality_index: 50,
            air_quality_level: AirQualityLevel::Good,
        };
        
        assert_eq!(station.air_quality_level, AirQualityLevel::Good);
        assert!(station.air_quality_index <= 100);
    }

    #[test]
    fn test_congestion_levels() {
        let levels = vec![
            CongestionLevel::FreeFlow,
            CongestionLevel::Light,
            CongestionLevel::Moderate,
            CongestionLevel::Heavy,
            CongestionLevel::Gridlock,
        ];
        
        assert_eq!(levels.len(), 5);
    }

    #[tokio::test]
    async fn test_smart_city_orchestrator_creation() {
        let orchestrator = SmartCityOrchestrator::new();
        let result = orchestrator.initialize_systems().await;
        assert!(result.is_ok());
    }
}