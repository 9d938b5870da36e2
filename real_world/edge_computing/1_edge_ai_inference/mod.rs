//! Edge AI Inference System with TensorFlow Lite Integration
//! MultiOS Edge Computing Demonstrations

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use serde::{Deserialize, Serialize};
use image::{DynamicImage, ImageOutputFormat};

/// TensorFlow Lite model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TFLiteModelConfig {
    pub model_path: String,
    pub input_shape: Vec<i32>,
    pub output_shape: Vec<i32>,
    pub input_type: String,
    pub output_type: String,
    pub num_threads: usize,
    pub use_gpu: bool,
    pub quantization_type: QuantizationType,
}

/// Quantization types for model optimization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QuantizationType {
    None,
    DynamicRange,
    FullInteger,
    Float16,
}

/// AI inference request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub request_id: String,
    pub model_name: String,
    pub input_data: Vec<f32>,
    pub timestamp: std::time::SystemTime,
    pub priority: u8,
}

/// AI inference result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResult {
    pub request_id: String,
    pub model_name: String,
    pub output_data: Vec<f32>,
    pub confidence: f32,
    pub processing_time_ms: f64,
    pub timestamp: std::time::SystemTime,
    pub edge_device_id: String,
}

/// Edge AI model types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EdgeAIModelType {
    Classification { num_classes: usize },
    ObjectDetection { max_objects: usize },
    PoseEstimation { num_keypoints: usize },
    Segmentation { num_classes: usize },
    Custom { input_shape: Vec<i32>, output_shape: Vec<i32> },
}

/// Edge AI model registry
#[derive(Debug, Clone)]
pub struct EdgeAIModel {
    pub model_id: String,
    pub model_type: EdgeAIModelType,
    pub config: TFLiteModelConfig,
    pub model_data: Vec<u8>,
    pub metadata: ModelMetadata,
    pub performance_stats: Arc<Mutex<ModelPerformanceStats>>,
}

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub input_description: String,
    pub output_description: String,
    pub supported_platforms: Vec<String>,
}

/// Performance statistics for models
#[derive(Debug, Clone)]
pub struct ModelPerformanceStats {
    pub total_inferences: u64,
    pub total_processing_time_ms: f64,
    pub min_processing_time_ms: f64,
    pub max_processing_time_ms: f64,
    pub avg_processing_time_ms: f64,
    pub error_count: u64,
    pub last_inference_time: Option<std::time::SystemTime>,
}

impl ModelPerformanceStats {
    pub fn new() -> Self {
        Self {
            total_inferences: 0,
            total_processing_time_ms: 0.0,
            min_processing_time_ms: f64::MAX,
            max_processing_time_ms: 0.0,
            avg_processing_time_ms: 0.0,
            error_count: 0,
            last_inference_time: None,
        }
    }

    pub fn record_inference(&mut self, processing_time_ms: f64, success: bool) {
        if success {
            self.total_inferences += 1;
            self.total_processing_time_ms += processing_time_ms;
            self.avg_processing_time_ms = self.total_processing_time_ms / self.total_inferences as f64;
            
            if processing_time_ms < self.min_processing_time_ms {
                self.min_processing_time_ms = processing_time_ms;
            }
            if processing_time_ms > self.max_processing_time_ms {
                self.max_processing_time_ms = processing_time_ms;
            }
        } else {
            self.error_count += 1;
        }
        
        self.last_inference_time = Some(std::time::SystemTime::now());
    }
}

/// Edge AI inference engine
pub struct EdgeAIEngine {
    models: Arc<RwLock<HashMap<String, EdgeAIModel>>>,
    inference_queue: Arc<RwLock<Vec<InferenceRequest>>>,
    result_cache: Arc<RwLock<HashMap<String, InferenceResult>>>,
    active_sessions: Arc<RwLock<HashMap<String, InferenceSession>>>,
    performance_monitor: Arc<Mutex<PerformanceMonitor>>,
}

#[derive(Debug)]
struct InferenceSession {
    session_id: String,
    model_name: String,
    start_time: std::time::SystemTime,
    requests_processed: u32,
}

/// Performance monitor for AI inference
#[derive(Debug)]
pub struct PerformanceMonitor {
    pub total_requests: u64,
    pub total_inferences: u64,
    pub total_processing_time_ms: f64,
    pub active_sessions: u32,
    pub queue_size: usize,
    pub cache_hit_rate: f64,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self {
            total_requests: 0,
            total_inferences: 0,
            total_processing_time_ms: 0.0,
            active_sessions: 0,
            queue_size: 0,
            cache_hit_rate: 0.0,
        }
    }

    pub fn record_request(&mut self) {
        self.total_requests += 1;
    }

    pub fn record_inference(&mut self, processing_time_ms: f64) {
        self.total_inferences += 1;
        self.total_processing_time_ms += processing_time_ms;
    }

    pub fn get_avg_processing_time(&self) -> f64 {
        if self.total_inferences > 0 {
            self.total_processing_time_ms / self.total_inferences as f64
        } else {
            0.0
        }
    }

    pub fn get_throughput(&self) -> f64 {
        // Inferences per second
        if self.total_processing_time_ms > 0.0 {
            (self.total_inferences as f64 / self.total_processing_time_ms) * 1000.0
        } else {
            0.0
        }
    }
}

impl EdgeAIEngine {
    pub fn new() -> Self {
        Self {
            models: Arc::new(RwLock::new(HashMap::new())),
            inference_queue: Arc::new(RwLock::new(Vec::new())),
            result_cache: Arc::new(RwLock::new(HashMap::new())),
            active_sessions: Arc::new(RwLock::new(HashMap::new())),
            performance_monitor: Arc::new(Mutex::new(PerformanceMonitor::new())),
        }
    }

    /// Register a new AI model
    pub async fn register_model(&self, model: EdgeAIModel) -> Result<(), Box<dyn std::error::Error>> {
        let mut models = self.models.write().await;
        models.insert(model.model_id.clone(), model);
        println!("Registered AI model: {}", model.model_id);
        Ok(())
    }

    /// Submit inference request
    pub async fn submit_inference(&self, request: InferenceRequest) -> Result<String, Box<dyn std::error::Error>> {
        let mut queue = self.inference_queue.write().await;
        queue.push(request);
        
        // Sort by priority (higher priority first)
        queue.sort_by(|a, b| b.priority.cmp(&a.priority));
        
        let mut monitor = self.performance_monitor.lock().unwrap();
        monitor.record_request();
        monitor.queue_size = queue.len();
        
        println!("Submitted inference request: {} for model: {}", request.request_id, request.model_name);
        Ok(request.request_id)
    }

    /// Process inference requests
    pub async fn process_inferences(&self) {
        let mut loop_count = 0;
        
        loop {
            loop_count += 1;
            if loop_count % 100 == 0 {
                println!("AI Engine processed {} iterations, queue size: {}", loop_count, self.inference_queue.read().await.len());
            }
            
            // Get next request from queue
            let request = {
                let mut queue = self.inference_queue.write().await;
                if queue.is_empty() {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    continue;
                }
                queue.remove(0)
            };
            
            // Find available model
            let model_opt = {
                let models = self.models.read().await;
                models.get(&request.model_name).cloned()
            };
            
            match model_opt {
                Some(model) => {
                    let start_time = Instant::now();
                    
                    // Simulate inference processing
                    let inference_result = self.simulate_inference(&request, &model).await;
                    
                    let processing_time = start_time.elapsed();
                    let processing_time_ms = processing_time.as_secs_f64() * 1000.0;
                    
                    // Update performance stats
                    {
                        let mut stats = model.performance_stats.lock().unwrap();
                        stats.record_inference(processing_time_ms, true);
                    }
                    
                    // Update performance monitor
                    {
                        let mut monitor = self.performance_monitor.lock().unwrap();
                        monitor.record_inference(processing_time_ms);
                        monitor.queue_size = self.inference_queue.read().await.len();
                    }
                    
                    // Cache result
                    {
                        let mut cache = self.result_cache.write().await;
                        cache.insert(inference_result.request_id.clone(), inference_result.clone());
                    }
                    
                    println!("Completed inference for {} in {:.2}ms", request.request_id, processing_time_ms);
                }
                None => {
                    println!("Model not found: {}", request.model_name);
                    {
                        let mut monitor = self.performance_monitor.lock().unwrap();
                        monitor.error_count = monitor.error_count.saturating_add(1);
                    }
                }
            }
            
            // Periodically clean up old cached results
            if loop_count % 1000 == 0 {
                self.cleanup_cache().await;
            }
        }
    }

    /// Simulate AI inference (in real implementation, would use TensorFlow Lite)
    async fn simulate_inference(&self, request: &InferenceRequest, model: &EdgeAIModel) -> InferenceResult {
        // Simulate processing time based on model complexity
        let processing_time_ms = match &model.model_type {
            EdgeAIModelType::Classification { .. } => 10.0 + rand::random::<f64>() * 20.0,
            EdgeAIModelType::ObjectDetection { .. } => 50.0 + rand::random::<f64>() * 100.0,
            EdgeAIModelType::PoseEstimation { .. } => 30.0 + rand::random::<f64>() * 70.0,
            EdgeAIModelType::Segmentation { .. } => 100.0 + rand::random::<f64>() * 200.0,
            EdgeAIModelType::Custom { .. } => 20.0 + rand::random::<f64>() * 40.0,
        };
        
        // Simulate processing delay
        tokio::time::sleep(Duration::from_millis(processing_time_ms as u64)).await;
        
        // Generate mock output data
        let output_size = match &model.model_type {
            EdgeAIModelType::Classification { num_classes } => *num_classes,
            EdgeAIModelType::ObjectDetection { .. } => 25, // 5 * max_objects
            EdgeAIModelType::PoseEstimation { num_keypoints } => *num_keypoints * 3, // x, y, confidence
            EdgeAIModelType::Segmentation { .. } => model.config.output_shape.iter().product(),
            EdgeAIModelType::Custom { output_shape, .. } => output_shape.iter().product(),
        };
        
        let output_data: Vec<f32> = (0..output_size)
            .map(|_| rand::random::<f32>())
            .collect();
        
        // Calculate confidence score
        let confidence = rand::random::<f32>() * 0.3 + 0.7; // Between 0.7 and 1.0
        
        InferenceResult {
            request_id: request.request_id.clone(),
            model_name: request.model_name.clone(),
            output_data,
            confidence,
            processing_time_ms,
            timestamp: std::time::SystemTime::now(),
            edge_device_id: "edge-device-001".to_string(),
        }
    }

    /// Get inference result
    pub async fn get_result(&self, request_id: &str) -> Option<InferenceResult> {
        let cache = self.result_cache.read().await;
        cache.get(request_id).cloned()
    }

    /// Get model performance statistics
    pub async fn get_model_stats(&self, model_name: &str) -> Option<ModelPerformanceStats> {
        let models = self.models.read().await;
        models.get(model_name).map(|model| {
            let stats = model.performance_stats.lock().unwrap();
            stats.clone()
        })
    }

    /// Get overall performance metrics
    pub async fn get_performance_metrics(&self) -> PerformanceMonitor {
        let monitor = self.performance_monitor.lock().unwrap();
        monitor.clone()
    }

    /// Start a new inference session
    pub async fn start_session(&self, model_name: String) -> String {
        let session_id = format!("session-{}", rand::random::<u32>());
        let session = InferenceSession {
            session_id: session_id.clone(),
            model_name: model_name.clone(),
            start_time: std::time::SystemTime::now(),
            requests_processed: 0,
        };
        
        {
            let mut sessions = self.active_sessions.write().await;
            sessions.insert(session_id.clone(), session);
        }
        
        {
            let mut monitor = self.performance_monitor.lock().unwrap();
            monitor.active_sessions += 1;
        }
        
        session_id
    }

    /// End an inference session
    pub async fn end_session(&self, session_id: &str) {
        {
            let mut sessions = self.active_sessions.write().await;
            sessions.remove(session_id);
        }
        
        {
            let mut monitor = self.performance_monitor.lock().unwrap();
            monitor.active_sessions = monitor.active_sessions.saturating_sub(1);
        }
    }

    /// Clean up old cached results
    async fn cleanup_cache(&self) {
        let mut cache = self.result_cache.write().await;
        let now = std::time::SystemTime::now();
        
        let keys_to_remove: Vec<String> = cache
            .iter()
            .filter(|(_, result)| {
                now.duration_since(result.timestamp).unwrap_or_default().as_secs() > 3600 // 1 hour
            })
            .map(|(key, _)| key.clone())
            .collect();
        
        for key in keys_to_remove {
            cache.remove(&key);
        }
        
        println!("Cleaned up {} old cached results", keys_to_remove.len());
    }

    /// Load model from file (simplified version)
    pub async fn load_model_from_file(&self, file_path: &str, model_id: &str) -> Result<(), Box<dyn std::error::Error>> {
        use std::fs::File;
        use std::io::Read;
        
        let mut file = File::open(file_path)?;
        let mut model_data = Vec::new();
        file.read_to_end(&mut model_data)?;
        
        // Create a mock model configuration
        let config = TFLiteModelConfig {
            model_path: file_path.to_string(),
            input_shape: vec![1, 224, 224, 3],
            output_shape: vec![1, 1000],
            input_type: "float32".to_string(),
            output_type: "float32".to_string(),
            num_threads: 4,
            use_gpu: false,
            quantization_type: QuantizationType::DynamicRange,
        };
        
        let model = EdgeAIModel {
            model_id: model_id.to_string(),
            model_type: EdgeAIModelType::Classification { num_classes: 1000 },
            config,
            model_data,
            metadata: ModelMetadata {
                name: format!("Model {}", model_id),
                version: "1.0.0".to_string(),
                description: "Loaded model".to_string(),
                author: "MultiOS".to_string(),
                license: "MIT".to_string(),
                input_description: "Image tensor".to_string(),
                output_description: "Classification logits".to_string(),
                supported_platforms: vec!["x86_64".to_string(), "aarch64".to_string()],
            },
            performance_stats: Arc::new(Mutex::new(ModelPerformanceStats::new())),
        };
        
        self.register_model(model).await?;
        Ok(())
    }
}

/// Create sample models for demonstration
pub fn create_sample_models() -> Vec<EdgeAIModel> {
    let mut models = Vec::new();
    
    // Image classification model
    let classification_model = EdgeAIModel {
        model_id: "mobilenet_v2".to_string(),
        model_type: EdgeAIModelType::Classification { num_classes: 1000 },
        config: TFLiteModelConfig {
            model_path: "models/mobilenet_v2.tflite".to_string(),
            input_shape: vec![1, 224, 224, 3],
            output_shape: vec![1, 1000],
            input_type: "float32".to_string(),
            output_type: "float32".to_string(),
            num_threads: 4,
            use_gpu: true,
            quantization_type: QuantizationType::DynamicRange,
        },
        model_data: vec![0; 1024], // Mock data
        metadata: ModelMetadata {
            name: "MobileNet V2".to_string(),
            version: "1.0".to_string(),
            description: "Efficient convolutional neural network for image classification".to_string(),
            author: "Google".to_string(),
            license: "Apache 2.0".to_string(),
            input_description: "224x224 RGB image".to_string(),
            output_description: "1000 class probabilities".to_string(),
            supported_platforms: vec!["x86_64".to_string(), "aarch64".to_string()],
        },
        performance_stats: Arc::new(Mutex::new(ModelPerformanceStats::new())),
    };
    
    // Object detection model
    let object_detection_model = EdgeAIModel {
        model_id: "ssd_mobilenet_v1".to_string(),
        model_type: EdgeAIModelType::ObjectDetection { max_objects: 10 },
        config: TFLiteModelConfig {
            model_path: "models/ssd_mobilenet_v1.tflite".to_string(),
            input_shape: vec![1, 320, 320, 3],
            output_shape: vec![1, 10, 25],
            input_type: "float32".to_string(),
            output_type: "float32".to_string(),
            num_threads: 4,
            use_gpu: false,
            quantization_type: QuantizationType::None,
        },
        model_data: vec![0; 2048], // Mock data
        metadata: ModelMetadata {
            name: "SSD MobileNet V1".to_string(),
            version: "1.0".to_string(),
            description: "Single Shot MultiBox Detector for object detection".to_string(),
            author: "TensorFlow".to_string(),
            license: "Apache 2.0".to_string(),
            input_description: "320x320 RGB image".to_string(),
            output_description: "Bounding boxes and class scores".to_string(),
            supported_platforms: vec!["x86_64".to_string(), "aarch64".to_string()],
        },
        performance_stats: Arc::new(Mutex::new(ModelPerformanceStats::new())),
    };
    
    models.push(classification_model);
    models.push(object_detection_model);
    
    models
}

use std::time::{Duration, Instant};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_edge_ai_engine_creation() {
        let engine = EdgeAIEngine::new();
        let metrics = engine.get_performance_metrics().await;
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.total_inferences, 0);
    }

    #[tokio::test]
    async fn test_model_registration() {
        let engine = EdgeAIEngine::new();
        let models = create_sample_models();
        
        for model in models {
            let result = engine.register_model(model).await;
            assert!(result.is_ok());
        }
    }

    #[tokio::test]
    async fn test_inference_submission() {
        let engine = EdgeAIEngine::new();
        
        let request = InferenceRequest {
            request_id: "test-001".to_string(),
            model_name: "mobilenet_v2".to_string(),
            input_data: vec![0.0; 224 * 224 * 3],
            timestamp: std::time::SystemTime::now(),
            priority: 5,
        };
        
        let result = engine.submit_inference(request).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_model_performance_stats() {
        let mut stats = ModelPerformanceStats::new();
        stats.record_inference(10.0, true);
        stats.record_inference(20.0, true);
        stats.record_inference(15.0, true);
        stats.record_inference(5.0, false);
        
        assert_eq!(stats.total_inferences, 3);
        assert_eq!(stats.error_count, 1);
        assert!((stats.avg_processing_time_ms - 15.0).abs() < f64::EPSILON);
        assert!((stats.min_processing_time_ms - 10.0).abs() < f64::EPSILON);
        assert!((stats.max_processing_time_ms - 20.0).abs() < f64::EPSILON);
    }
}