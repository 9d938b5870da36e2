//! Processor Configuration Module
//!
//! This module handles the generation and management of custom processor
//! configurations for experimental architectures and research purposes.

use crate::architecture::{Architecture, ArchitectureSpec, CacheConfig, PipelineConfig, BranchPredictor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Result, Context};
use log::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    pub name: String,
    pub architecture: Architecture,
    pub core_config: CoreConfig,
    pub cache_config: CustomCacheConfig,
    pub pipeline_config: CustomPipelineConfig,
    pub execution_units: ExecutionUnitConfig,
    pub memory_config: MemoryConfig,
    pub special_features: SpecialFeaturesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    pub frequency_ghz: f64,
    pub voltage_v: f64,
    pub power_consumption_w: f64,
    pub thermal_design_power_w: f64,
    pub instructions_per_cycle: u32,
    pub issue_width: u32,
    pub retirement_width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomCacheConfig {
    pub l1_instruction: CustomCacheLevel,
    pub l1_data: CustomCacheLevel,
    pub l2_unified: CustomCacheLevel,
    pub l3_unified: CustomCacheLevel,
    pub instruction_tlb: TLBConfig,
    pub data_tlb: TLBConfig,
    pub l2_tlb: TLBConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomCacheLevel {
    pub size_kb: u32,
    pub associativity: u32,
    pub line_size: u32,
    pub replacement_policy: ReplacementPolicy,
    pub write_policy: WritePolicy,
    pub prefetcher: PrefetcherType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TLBConfig {
    pub entries: u32,
    pub associativity: u32,
    pub page_sizes: Vec<u32>, // in KB
    pub replacement_policy: ReplacementPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPipelineConfig {
    pub stages: CustomPipelineStages,
    pub branch_predictor: CustomBranchPredictor,
    pub out_of_order: OutOfOrderConfig,
    pub speculation: SpeculationConfig,
    pub execution_units: Vec<ExecutionUnitType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPipelineStages {
    pub fetch: u32,
    pub decode: u32,
    pub rename: u32,
    pub dispatch: u32,
    pub execute: u32,
    pub memory: u32,
    pub writeback: u32,
    pub commit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomBranchPredictor {
    pub type_name: BranchPredictorType,
    pub global_history_size: u32,
    pub local_history_size: u32,
    pub pattern_history_size: u32,
    pub predictor_size: u32,
    pub btb_entries: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BranchPredictorType {
    Static,
    TwoBit,
    GShare,
    TAGE,
    TAGE_L,
    Tournament,
    Perceptron,
    Custom(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutOfOrderConfig {
    pub enabled: bool,
    pub reorder_buffer_size: u32,
    pub reservation_stations: u32,
    pub load_store_queue_size: u32,
    pub issue_queue_size: u32,
    pub physical_registers: u32,
    pub retirement_queue_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeculationConfig {
    pub enabled: bool,
    pub speculative_depth: u32,
    pub value_prediction: bool,
    pub memory_disambiguation: bool,
    pub recovery_mechanism: RecoveryMechanism,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecoveryMechanism {
    Checkpoint,
    Replay,
    Squash,
    Custom(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionUnitConfig {
    pub alu_units: u32,
    pub fpu_units: u32,
    pub load_store_units: u32,
    pub branch_units: u32,
    pub vector_units: u32,
    pub crypto_units: u32,
    pub unit_latencies: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExecutionUnitType {
    ALU,
    FPU,
    LoadStore,
    Branch,
    Vector,
    Crypto,
    Custom(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub channels: u32,
    pub width_bits: u32,
    pub frequency_mhz: u32,
    pub bandwidth_gbps: f64,
    pub latency_ns: f64,
    pub ecc_support: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialFeaturesConfig {
    pub hardware_virtualization: bool,
    pub security_extensions: bool,
    pub vector_extensions: bool,
    pub crypto_extensions: bool,
    pub ai_extensions: bool,
    pub custom_features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReplacementPolicy {
    LRU,
    PLRU,
    MRU,
    Random,
    FIFO,
    LFU,
    Custom(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WritePolicy {
    WriteThrough,
    WriteBack,
    WriteAround,
    Custom(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PrefetcherType {
    None,
    Sequential,
    Strided,
    Context,
    Custom(String),
}

pub struct ConfigGenerator;

impl ConfigGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a standard configuration for an architecture
    pub fn generate_standard_config(architecture: &Architecture) -> ProcessorConfig {
        match architecture {
            Architecture::X86_64 => Self::generate_x86_64_config(),
            Architecture::ARM64 => Self::generate_arm64_config(),
            Architecture::RISC_V64 => Self::generate_riscv64_config(),
            Architecture::SPARC64 => Self::generate_sparc64_config(),
            Architecture::PowerPC64 => Self::generate_powerpc64_config(),
        }
    }

    /// Generate an experimental high-performance configuration
    pub fn generate_high_performance_config(architecture: &Architecture) -> ProcessorConfig {
        let mut config = Self::generate_standard_config(architecture);
        
        // Enhance specifications
        config.core_config.frequency_ghz *= 1.5;
        config.core_config.instructions_per_cycle *= 2;
        config.core_config.issue_width *= 2;
        config.cache_config.l2_unified.size_kb *= 2;
        config.cache_config.l3_unified.size_kb *= 2;
        config.pipeline_config.branch_predictor = CustomBranchPredictor {
            type_name: BranchPredictorType::TAGE_L,
            global_history_size: 64,
            local_history_size: 128,
            pattern_history_size: 256,
            predictor_size: 4096,
            btb_entries: 8192,
        };

        config
    }

    /// Generate an energy-efficient configuration
    pub fn generate_energy_efficient_config(architecture: &Architecture) -> ProcessorConfig {
        let mut config = Self::generate_standard_config(architecture);
        
        // Optimize for power efficiency
        config.core_config.frequency_ghz *= 0.7;
        config.core_config.voltage_v *= 0.8;
        config.cache_config.l2_unified.size_kb = config.cache_config.l2_unified.size_kb / 2;
        config.cache_config.l3_unified.size_kb = config.cache_config.l3_unified.size_kb / 2;
        config.pipeline_config.out_of_order.enabled = false;
        config.pipeline_config.speculation.enabled = false;

        config
    }

    /// Generate a specialized AI/ML configuration
    pub fn generate_ai_optimized_config(architecture: &Architecture) -> ProcessorConfig {
        let mut config = Self::generate_standard_config(architecture);
        
        // AI-focused enhancements
        config.execution_units.vector_units *= 4;
        config.execution_units.crypto_units *= 2;
        config.special_features.ai_extensions = true;
        config.special_features.vector_extensions = true;
        config.cache_config.l1_data.size_kb *= 2;
        config.pipeline_config.execution_units.push(ExecutionUnitType::Custom("MatrixUnit".to_string()));

        config
    }

    /// Generate x86_64 configuration
    fn generate_x86_64_config() -> ProcessorConfig {
        ProcessorConfig {
            name: "x86_64 Standard".to_string(),
            architecture: Architecture::X86_64,
            core_config: CoreConfig {
                frequency_ghz: 3.5,
                voltage_v: 1.2,
                power_consumption_w: 65.0,
                thermal_design_power_w: 95.0,
                instructions_per_cycle: 6,
                issue_width: 6,
                retirement_width: 4,
            },
            cache_config: CustomCacheConfig {
                l1_instruction: CustomCacheLevel {
                    size_kb: 32,
                    associativity: 8,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteThrough,
                    prefetcher: PrefetcherType::Sequential,
                },
                l1_data: CustomCacheLevel {
                    size_kb: 32,
                    associativity: 8,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::PLRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Strided,
                },
                l2_unified: CustomCacheLevel {
                    size_kb: 256,
                    associativity: 8,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                l3_unified: CustomCacheLevel {
                    size_kb: 8192,
                    associativity: 16,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                instruction_tlb: TLBConfig {
                    entries: 64,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
                data_tlb: TLBConfig {
                    entries: 64,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::PLRU,
                },
                l2_tlb: TLBConfig {
                    entries: 1024,
                    associativity: 8,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
            },
            pipeline_config: CustomPipelineConfig {
                stages: CustomPipelineStages {
                    fetch: 1,
                    decode: 2,
                    rename: 1,
                    dispatch: 1,
                    execute: 4,
                    memory: 2,
                    writeback: 2,
                    commit: 1,
                },
                branch_predictor: CustomBranchPredictor {
                    type_name: BranchPredictorType::Tournament,
                    global_history_size: 14,
                    local_history_size: 11,
                    pattern_history_size: 1024,
                    predictor_size: 4096,
                    btb_entries: 4096,
                },
                out_of_order: OutOfOrderConfig {
                    enabled: true,
                    reorder_buffer_size: 192,
                    reservation_stations: 60,
                    load_store_queue_size: 48,
                    issue_queue_size: 64,
                    physical_registers: 192,
                    retirement_queue_size: 64,
                },
                speculation: SpeculationConfig {
                    enabled: true,
                    speculative_depth: 8,
                    value_prediction: true,
                    memory_disambiguation: true,
                    recovery_mechanism: RecoveryMechanism::Checkpoint,
                },
                execution_units: vec![
                    ExecutionUnitType::ALU,
                    ExecutionUnitType::FPU,
                    ExecutionUnitType::LoadStore,
                    ExecutionUnitType::Branch,
                    ExecutionUnitType::Vector,
                ],
            },
            execution_units: ExecutionUnitConfig {
                alu_units: 4,
                fpu_units: 2,
                load_store_units: 2,
                branch_units: 1,
                vector_units: 1,
                crypto_units: 1,
                unit_latencies: {
                    let mut latencies = HashMap::new();
                    latencies.insert("ALU".to_string(), 1);
                    latencies.insert("FPU".to_string(), 4);
                    latencies.insert("LoadStore".to_string(), 3);
                    latencies.insert("Branch".to_string(), 1);
                    latencies.insert("Vector".to_string(), 2);
                    latencies.insert("Crypto".to_string(), 3);
                    latencies
                },
            },
            memory_config: MemoryConfig {
                channels: 2,
                width_bits: 64,
                frequency_mhz: 3200,
                bandwidth_gbps: 51.2,
                latency_ns: 50.0,
                ecc_support: true,
            },
            special_features: SpecialFeaturesConfig {
                hardware_virtualization: true,
                security_extensions: true,
                vector_extensions: true,
                crypto_extensions: true,
                ai_extensions: false,
                custom_features: vec!["AVX-512".to_string(), "BMI2".to_string()],
            },
        }
    }

    /// Generate ARM64 configuration
    fn generate_arm64_config() -> ProcessorConfig {
        ProcessorConfig {
            name: "ARM64 Standard".to_string(),
            architecture: Architecture::ARM64,
            core_config: CoreConfig {
                frequency_ghz: 2.5,
                voltage_v: 0.9,
                power_consumption_w: 25.0,
                thermal_design_power_w: 35.0,
                instructions_per_cycle: 3,
                issue_width: 3,
                retirement_width: 2,
            },
            cache_config: CustomCacheConfig {
                l1_instruction: CustomCacheLevel {
                    size_kb: 64,
                    associativity: 4,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::PLRU,
                    write_policy: WritePolicy::WriteThrough,
                    prefetcher: PrefetcherType::Sequential,
                },
                l1_data: CustomCacheLevel {
                    size_kb: 64,
                    associativity: 4,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::PLRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Strided,
                },
                l2_unified: CustomCacheLevel {
                    size_kb: 512,
                    associativity: 8,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                l3_unified: CustomCacheLevel {
                    size_kb: 4096,
                    associativity: 16,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                instruction_tlb: TLBConfig {
                    entries: 48,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
                data_tlb: TLBConfig {
                    entries: 48,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::PLRU,
                },
                l2_tlb: TLBConfig {
                    entries: 1024,
                    associativity: 8,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
            },
            pipeline_config: CustomPipelineConfig {
                stages: CustomPipelineStages {
                    fetch: 2,
                    decode: 2,
                    rename: 1,
                    dispatch: 1,
                    execute: 6,
                    memory: 2,
                    writeback: 2,
                    commit: 1,
                },
                branch_predictor: CustomBranchPredictor {
                    type_name: BranchPredictorType::TAGE,
                    global_history_size: 64,
                    local_history_size: 128,
                    pattern_history_size: 1024,
                    predictor_size: 2048,
                    btb_entries: 2048,
                },
                out_of_order: OutOfOrderConfig {
                    enabled: true,
                    reorder_buffer_size: 128,
                    reservation_stations: 48,
                    load_store_queue_size: 32,
                    issue_queue_size: 48,
                    physical_registers: 128,
                    retirement_queue_size: 48,
                },
                speculation: SpeculationConfig {
                    enabled: true,
                    speculative_depth: 6,
                    value_prediction: true,
                    memory_disambiguation: true,
                    recovery_mechanism: RecoveryMechanism::Replay,
                },
                execution_units: vec![
                    ExecutionUnitType::ALU,
                    ExecutionUnitType::FPU,
                    ExecutionUnitType::LoadStore,
                    ExecutionUnitType::Branch,
                    ExecutionUnitType::Vector,
                ],
            },
            execution_units: ExecutionUnitConfig {
                alu_units: 2,
                fpu_units: 2,
                load_store_units: 2,
                branch_units: 1,
                vector_units: 2,
                crypto_units: 1,
                unit_latencies: {
                    let mut latencies = HashMap::new();
                    latencies.insert("ALU".to_string(), 1);
                    latencies.insert("FPU".to_string(), 3);
                    latencies.insert("LoadStore".to_string(), 2);
                    latencies.insert("Branch".to_string(), 1);
                    latencies.insert("Vector".to_string(), 1);
                    latencies.insert("Crypto".to_string(), 2);
                    latencies
                },
            },
            memory_config: MemoryConfig {
                channels: 4,
                width_bits: 64,
                frequency_mhz: 3200,
                bandwidth_gbps: 51.2,
                latency_ns: 50.0,
                ecc_support: true,
            },
            special_features: SpecialFeaturesConfig {
                hardware_virtualization: true,
                security_extensions: true,
                vector_extensions: true,
                crypto_extensions: true,
                ai_extensions: true,
                custom_features: vec!["NEON".to_string(), "SVE".to_string()],
            },
        }
    }

    /// Generate RISC-V64 configuration
    fn generate_riscv64_config() -> ProcessorConfig {
        ProcessorConfig {
            name: "RISC-V64 Standard".to_string(),
            architecture: Architecture::RISC_V64,
            core_config: CoreConfig {
                frequency_ghz: 2.0,
                voltage_v: 0.8,
                power_consumption_w: 15.0,
                thermal_design_power_w: 25.0,
                instructions_per_cycle: 1,
                issue_width: 1,
                retirement_width: 1,
            },
            cache_config: CustomCacheConfig {
                l1_instruction: CustomCacheLevel {
                    size_kb: 32,
                    associativity: 4,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteThrough,
                    prefetcher: PrefetcherType::None,
                },
                l1_data: CustomCacheLevel {
                    size_kb: 32,
                    associativity: 4,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Sequential,
                },
                l2_unified: CustomCacheLevel {
                    size_kb: 256,
                    associativity: 8,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Strided,
                },
                l3_unified: CustomCacheLevel {
                    size_kb: 2048,
                    associativity: 8,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                instruction_tlb: TLBConfig {
                    entries: 16,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
                data_tlb: TLBConfig {
                    entries: 16,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
                l2_tlb: TLBConfig {
                    entries: 256,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
            },
            pipeline_config: CustomPipelineConfig {
                stages: CustomPipelineStages {
                    fetch: 1,
                    decode: 1,
                    rename: 0,
                    dispatch: 1,
                    execute: 2,
                    memory: 1,
                    writeback: 1,
                    commit: 1,
                },
                branch_predictor: CustomBranchPredictor {
                    type_name: BranchPredictorType::TwoBit,
                    global_history_size: 8,
                    local_history_size: 8,
                    pattern_history_size: 256,
                    predictor_size: 512,
                    btb_entries: 512,
                },
                out_of_order: OutOfOrderConfig {
                    enabled: false,
                    reorder_buffer_size: 0,
                    reservation_stations: 0,
                    load_store_queue_size: 0,
                    issue_queue_size: 0,
                    physical_registers: 32,
                    retirement_queue_size: 0,
                },
                speculation: SpeculationConfig {
                    enabled: false,
                    speculative_depth: 0,
                    value_prediction: false,
                    memory_disambiguation: false,
                    recovery_mechanism: RecoveryMechanism::Squash,
                },
                execution_units: vec![
                    ExecutionUnitType::ALU,
                    ExecutionUnitType::FPU,
                    ExecutionUnitType::LoadStore,
                    ExecutionUnitType::Branch,
                ],
            },
            execution_units: ExecutionUnitConfig {
                alu_units: 1,
                fpu_units: 1,
                load_store_units: 1,
                branch_units: 1,
                vector_units: 0,
                crypto_units: 0,
                unit_latencies: {
                    let mut latencies = HashMap::new();
                    latencies.insert("ALU".to_string(), 1);
                    latencies.insert("FPU".to_string(), 2);
                    latencies.insert("LoadStore".to_string(), 2);
                    latencies.insert("Branch".to_string(), 1);
                    latencies
                },
            },
            memory_config: MemoryConfig {
                channels: 2,
                width_bits: 64,
                frequency_mhz: 2133,
                bandwidth_gbps: 34.1,
                latency_ns: 60.0,
                ecc_support: true,
            },
            special_features: SpecialFeaturesConfig {
                hardware_virtualization: true,
                security_extensions: true,
                vector_extensions: true,
                crypto_extensions: true,
                ai_extensions: false,
                custom_features: vec!["RV32IMAFDC".to_string()],
            },
        }
    }

    /// Generate SPARC64 configuration
    fn generate_sparc64_config() -> ProcessorConfig {
        ProcessorConfig {
            name: "SPARC64 Standard".to_string(),
            architecture: Architecture::SPARC64,
            core_config: CoreConfig {
                frequency_ghz: 2.8,
                voltage_v: 1.1,
                power_consumption_w: 85.0,
                thermal_design_power_w: 125.0,
                instructions_per_cycle: 3,
                issue_width: 3,
                retirement_width: 3,
            },
            cache_config: CustomCacheConfig {
                l1_instruction: CustomCacheLevel {
                    size_kb: 64,
                    associativity: 4,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteThrough,
                    prefetcher: PrefetcherType::Sequential,
                },
                l1_data: CustomCacheLevel {
                    size_kb: 64,
                    associativity: 4,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Strided,
                },
                l2_unified: CustomCacheLevel {
                    size_kb: 1024,
                    associativity: 8,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                l3_unified: CustomCacheLevel {
                    size_kb: 8192,
                    associativity: 16,
                    line_size: 64,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                instruction_tlb: TLBConfig {
                    entries: 128,
                    associativity: 8,
                    page_sizes: vec![4, 4*1024, 256*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
                data_tlb: TLBConfig {
                    entries: 128,
                    associativity: 8,
                    page_sizes: vec![4, 4*1024, 256*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
                l2_tlb: TLBConfig {
                    entries: 2048,
                    associativity: 8,
                    page_sizes: vec![4, 4*1024, 256*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
            },
            pipeline_config: CustomPipelineConfig {
                stages: CustomPipelineStages {
                    fetch: 2,
                    decode: 2,
                    rename: 1,
                    dispatch: 1,
                    execute: 6,
                    memory: 3,
                    writeback: 2,
                    commit: 1,
                },
                branch_predictor: CustomBranchPredictor {
                    type_name: BranchPredictorType::GShare,
                    global_history_size: 16,
                    local_history_size: 16,
                    pattern_history_size: 2048,
                    predictor_size: 4096,
                    btb_entries: 6144,
                },
                out_of_order: OutOfOrderConfig {
                    enabled: true,
                    reorder_buffer_size: 256,
                    reservation_stations: 96,
                    load_store_queue_size: 64,
                    issue_queue_size: 96,
                    physical_registers: 256,
                    retirement_queue_size: 96,
                },
                speculation: SpeculationConfig {
                    enabled: true,
                    speculative_depth: 10,
                    value_prediction: true,
                    memory_disambiguation: true,
                    recovery_mechanism: RecoveryMechanism::Checkpoint,
                },
                execution_units: vec![
                    ExecutionUnitType::ALU,
                    ExecutionUnitType::FPU,
                    ExecutionUnitType::LoadStore,
                    ExecutionUnitType::Branch,
                    ExecutionUnitType::Vector,
                ],
            },
            execution_units: ExecutionUnitConfig {
                alu_units: 3,
                fpu_units: 2,
                load_store_units: 2,
                branch_units: 1,
                vector_units: 1,
                crypto_units: 1,
                unit_latencies: {
                    let mut latencies = HashMap::new();
                    latencies.insert("ALU".to_string(), 1);
                    latencies.insert("FPU".to_string(), 5);
                    latencies.insert("LoadStore".to_string(), 3);
                    latencies.insert("Branch".to_string(), 1);
                    latencies.insert("Vector".to_string(), 3);
                    latencies.insert("Crypto".to_string(), 4);
                    latencies
                },
            },
            memory_config: MemoryConfig {
                channels: 4,
                width_bits: 128,
                frequency_mhz: 3200,
                bandwidth_gbps: 102.4,
                latency_ns: 45.0,
                ecc_support: true,
            },
            special_features: SpecialFeaturesConfig {
                hardware_virtualization: true,
                security_extensions: true,
                vector_extensions: true,
                crypto_extensions: true,
                ai_extensions: false,
                custom_features: vec!["VIS1".to_string(), "VIS2".to_string(), "VIS3".to_string()],
            },
        }
    }

    /// Generate PowerPC64 configuration
    fn generate_powerpc64_config() -> ProcessorConfig {
        ProcessorConfig {
            name: "PowerPC64 Standard".to_string(),
            architecture: Architecture::PowerPC64,
            core_config: CoreConfig {
                frequency_ghz: 3.2,
                voltage_v: 1.15,
                power_consumption_w: 70.0,
                thermal_design_power_w: 100.0,
                instructions_per_cycle: 6,
                issue_width: 6,
                retirement_width: 4,
            },
            cache_config: CustomCacheConfig {
                l1_instruction: CustomCacheLevel {
                    size_kb: 32,
                    associativity: 8,
                    line_size: 128,
                    replacement_policy: ReplacementPolicy::PLRU,
                    write_policy: WritePolicy::WriteThrough,
                    prefetcher: PrefetcherType::Sequential,
                },
                l1_data: CustomCacheLevel {
                    size_kb: 32,
                    associativity: 8,
                    line_size: 128,
                    replacement_policy: ReplacementPolicy::PLRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Strided,
                },
                l2_unified: CustomCacheLevel {
                    size_kb: 512,
                    associativity: 8,
                    line_size: 128,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                l3_unified: CustomCacheLevel {
                    size_kb: 8192,
                    associativity: 16,
                    line_size: 128,
                    replacement_policy: ReplacementPolicy::LRU,
                    write_policy: WritePolicy::WriteBack,
                    prefetcher: PrefetcherType::Context,
                },
                instruction_tlb: TLBConfig {
                    entries: 64,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024, 16*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
                data_tlb: TLBConfig {
                    entries: 64,
                    associativity: 4,
                    page_sizes: vec![4, 4*1024, 16*1024],
                    replacement_policy: ReplacementPolicy::PLRU,
                },
                l2_tlb: TLBConfig {
                    entries: 1024,
                    associativity: 8,
                    page_sizes: vec![4, 4*1024, 16*1024],
                    replacement_policy: ReplacementPolicy::LRU,
                },
            },
            pipeline_config: CustomPipelineConfig {
                stages: CustomPipelineStages {
                    fetch: 2,
                    decode: 2,
                    rename: 1,
                    dispatch: 1,
                    execute: 5,
                    memory: 3,
                    writeback: 2,
                    commit: 1,
                },
                branch_predictor: CustomBranchPredictor {
                    type_name: BranchPredictorType::Tournament,
                    global_history_size: 32,
                    local_history_size: 16,
                    pattern_history_size: 1024,
                    predictor_size: 4096,
                    btb_entries: 4096,
                },
                out_of_order: OutOfOrderConfig {
                    enabled: true,
                    reorder_buffer_size: 192,
                    reservation_stations: 72,
                    load_store_queue_size: 48,
                    issue_queue_size: 72,
                    physical_registers: 192,
                    retirement_queue_size: 72,
                },
                speculation: SpeculationConfig {
                    enabled: true,
                    speculative_depth: 8,
                    value_prediction: true,
                    memory_disambiguation: true,
                    recovery_mechanism: RecoveryMechanism::Replay,
                },
                execution_units: vec![
                    ExecutionUnitType::ALU,
                    ExecutionUnitType::FPU,
                    ExecutionUnitType::LoadStore,
                    ExecutionUnitType::Branch,
                    ExecutionUnitType::Vector,
                ],
            },
            execution_units: ExecutionUnitConfig {
                alu_units: 4,
                fpu_units: 2,
                load_store_units: 2,
                branch_units: 1,
                vector_units: 2,
                crypto_units: 1,
                unit_latencies: {
                    let mut latencies = HashMap::new();
                    latencies.insert("ALU".to_string(), 1);
                    latencies.insert("FPU".to_string(), 4);
                    latencies.insert("LoadStore".to_string(), 3);
                    latencies.insert("Branch".to_string(), 1);
                    latencies.insert("Vector".to_string(), 2);
                    latencies.insert("Crypto".to_string(), 3);
                    latencies
                },
            },
            memory_config: MemoryConfig {
                channels: 4,
                width_bits: 128,
                frequency_mhz: 2933,
                bandwidth_gbps: 93.8,
                latency_ns: 50.0,
                ecc_support: true,
            },
            special_features: SpecialFeaturesConfig {
                hardware_virtualization: true,
                security_extensions: true,
                vector_extensions: true,
                crypto_extensions: true,
                ai_extensions: false,
                custom_features: vec!["AltiVec".to_string(), "VSX".to_string()],
            },
        }
    }

    /// Save configuration to file
    pub fn save_config(config: &ProcessorConfig, output_file: &str) -> Result<()> {
        let json_data = serde_json::to_string_pretty(config)
            .context("Failed to serialize processor configuration")?;
        
        // Ensure directory exists
        if let Some(parent) = Path::new(output_file).parent() {
            fs::create_dir_all(parent)
                .context("Failed to create output directory")?;
        }
        
        fs::write(output_file, json_data)
            .context("Failed to write processor configuration")?;
        
        info!("Processor configuration saved to {}", output_file);
        Ok(())
    }

    /// Load configuration from file
    pub fn load_config(input_file: &str) -> Result<ProcessorConfig> {
        let json_data = fs::read_to_string(input_file)
            .context("Failed to read processor configuration file")?;
        
        let config: ProcessorConfig = serde_json::from_str(&json_data)
            .context("Failed to deserialize processor configuration")?;
        
        info!("Processor configuration loaded from {}", input_file);
        Ok(config)
    }

    /// Generate comparison report for multiple configurations
    pub fn generate_config_comparison_report(configs: &HashMap<String, ProcessorConfig>, output_file: &str) -> Result<String> {
        let mut report = String::new();
        
        report.push_str("# Processor Configuration Comparison Report\n\n");
        report.push_str("## Executive Summary\n\n");
        report.push_str("This report compares different processor configurations across various metrics.\n\n");

        // Summary table
        report.push_str("## Configuration Summary\n\n");
        report.push_str("| Config Name | Architecture | Frequency (GHz) | Power (W) | TDP (W) | IPC | Cache L1 | Cache L2 |\n");
        report.push_str("|-------------|--------------|-----------------|-----------|---------|-----|----------|----------|\n");

        for (name, config) in configs {
            report.push_str(&format!(
                "| {} | {} | {:.1} | {:.1} | {:.1} | {} | {}KB | {}KB |\n",
                name,
                config.architecture,
                config.core_config.frequency_ghz,
                config.core_config.power_consumption_w,
                config.core_config.thermal_design_power_w,
                config.core_config.instructions_per_cycle,
                config.cache_config.l1_data.size_kb,
                config.cache_config.l2_unified.size_kb
            ));
        }

        report.push_str("\n## Detailed Analysis\n\n");

        for (name, config) in configs {
            report.push_str(&format!("### {} Configuration\n\n", name));
            report.push_str(&format!("**Architecture:** {}\n", config.architecture));
            report.push_str(&format!("**Frequency:** {:.1} GHz\n", config.core_config.frequency_ghz));
            report.push_str(&format!("**Power Consumption:** {:.1} W\n", config.core_config.power_consumption_w));
            report.push_str(&format!("**TDP:** {:.1} W\n\n", config.core_config.thermal_design_power_w));

            report.push_str("#### Cache Configuration\n\n");
            report.push_str(&format!("- **L1 Instruction:** {}KB, {}way\n", 
                config.cache_config.l1_instruction.size_kb, 
                config.cache_config.l1_instruction.associativity));
            report.push_str(&format!("- **L1 Data:** {}KB, {}way\n", 
                config.cache_config.l1_data.size_kb, 
                config.cache_config.l1_data.associativity));
            report.push_str(&format!("- **L2 Unified:** {}KB, {}way\n", 
                config.cache_config.l2_unified.size_kb, 
                config.cache_config.l2_unified.associativity));
            report.push_str(&format!("- **L3 Unified:** {}KB, {}way\n\n", 
                config.cache_config.l3_unified.size_kb, 
                config.cache_config.l3_unified.associativity));

            report.push_str("#### Execution Units\n\n");
            report.push_str(&format!("- **ALU Units:** {}\n", config.execution_units.alu_units));
            report.push_str(&format!("- **FPU Units:** {}\n", config.execution_units.fpu_units));
            report.push_str(&format!("- **Load/Store Units:** {}\n", config.execution_units.load_store_units));
            report.push_str(&format!("- **Vector Units:** {}\n", config.execution_units.vector_units));
            report.push_str(&format!("- **Crypto Units:** {}\n\n", config.execution_units.crypto_units));

            report.push_str("#### Special Features\n\n");
            for feature in &config.special_features.custom_features {
                report.push_str(&format!("- {}\n", feature));
            }
            report.push_str("\n");
        }

        // Ensure directory exists
        if let Some(parent) = Path::new(output_file).parent() {
            fs::create_dir_all(parent)
                .context("Failed to create output directory")?;
        }
        
        fs::write(output_file, report)
            .context("Failed to write configuration comparison report")?;
        
        info!("Configuration comparison report saved to {}", output_file);
        Ok(report)
    }
}

/// Public API functions

/// Generate a custom processor configuration
pub fn generate_configuration(config_type: &str) -> Result<ProcessorConfig> {
    let generator = ConfigGenerator::new();
    
    match config_type {
        "standard" | "default" => {
            let arch = Architecture::X86_64;
            Ok(generator.generate_standard_config(&arch))
        }
        "high-performance" | "high_perf" => {
            let arch = Architecture::X86_64;
            Ok(generator.generate_high_performance_config(&arch))
        }
        "energy-efficient" | "low-power" => {
            let arch = Architecture::ARM64;
            Ok(generator.generate_energy_efficient_config(&arch))
        }
        "ai-optimized" | "ai" => {
            let arch = Architecture::X86_64;
            Ok(generator.generate_ai_optimized_config(&arch))
        }
        _ => {
            let arch = Architecture::X86_64;
            Ok(generator.generate_standard_config(&arch))
        }
    }
}

/// Generate multiple configurations for comparison
pub fn generate_comparison_configs(architectures: Vec<Architecture>, config_types: Vec<String>) -> Result<HashMap<String, ProcessorConfig>> {
    let generator = ConfigGenerator::new();
    let mut configs = HashMap::new();

    for arch in architectures {
        for config_type in &config_types {
            let config_name = format!("{:?}_{}", arch, config_type);
            
            let config = match config_type.as_str() {
                "standard" => generator.generate_standard_config(&arch),
                "high-performance" => generator.generate_high_performance_config(&arch),
                "energy-efficient" => generator.generate_energy_efficient_config(&arch),
                "ai-optimized" => generator.generate_ai_optimized_config(&arch),
                _ => generator.generate_standard_config(&arch),
            };

            configs.insert(config_name, config);
        }
    }

    Ok(configs)
}

/// Save configuration to file
pub fn save_config(config: &ProcessorConfig, output_file: &str) -> Result<()> {
    ConfigGenerator::save_config(config, output_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_standard_config() {
        let generator = ConfigGenerator::new();
        let config = generator.generate_standard_config(&Architecture::X86_64);
        assert_eq!(config.architecture, Architecture::X86_64);
        assert!(config.core_config.frequency_ghz > 0.0);
    }

    #[test]
    fn test_generate_high_performance_config() {
        let generator = ConfigGenerator::new();
        let standard_config = generator.generate_standard_config(&Architecture::X86_64);
        let high_perf_config = generator.generate_high_performance_config(&Architecture::X86_64);
        
        assert!(high_perf_config.core_config.frequency_ghz > standard_config.core_config.frequency_ghz);
    }
}