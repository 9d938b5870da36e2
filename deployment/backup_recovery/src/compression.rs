use anyhow::{Result, Context};
use tracing::{info, warn, debug};
use serde_json::Value;

use crate::types::*;

/// Compression engine for backup data
pub struct CompressionEngine {
    // Configuration and state
}

impl CompressionEngine {
    /// Create a new compression engine
    pub async fn new() -> Result<Self> {
        info!("Initializing compression engine");
        Ok(Self {})
    }
    
    /// Compress data using specified algorithm
    pub async fn compress(
        &self,
        data: &[u8],
        algorithm: &CompressionAlgorithm,
    ) -> Result<Vec<u8>> {
        match algorithm {
            CompressionAlgorithm::None => {
                Ok(data.to_vec())
            }
            CompressionAlgorithm::Gzip => {
                self.compress_gzip(data).await
            }
            CompressionAlgorithm::Lz4 => {
                self.compress_lz4(data).await
            }
            CompressionAlgorithm::Zstd => {
                self.compress_zstd(data).await
            }
        }
    }
    
    /// Decompress data using specified algorithm
    pub async fn decompress(
        &self,
        compressed_data: &[u8],
        metadata: &Value,
    ) -> Result<Vec<u8>> {
        // Extract compression algorithm from metadata
        let algorithm = self.extract_compression_algorithm(metadata)?;
        
        match algorithm {
            CompressionAlgorithm::None => {
                Ok(compressed_data.to_vec())
            }
            CompressionAlgorithm::Gzip => {
                self.decompress_gzip(compressed_data).await
            }
            CompressionAlgorithm::Lz4 => {
                self.decompress_lz4(compressed_data).await
            }
            CompressionAlgorithm::Zstd => {
                self.decompress_zstd(compressed_data).await
            }
        }
    }
    
    /// Compress using GZIP
    async fn compress_gzip(&self, data: &[u8]) -> Result<Vec<u8>> {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write;
        
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data)?;
        let compressed = encoder.finish()?;
        
        debug!("GZIP compression: {} bytes -> {} bytes", data.len(), compressed.len());
        Ok(compressed)
    }
    
    /// Decompress using GZIP
    async fn decompress_gzip(&self, compressed_data: &[u8]) -> Result<Vec<u8>> {
        use flate2::read::GzDecoder;
        use std::io::Read;
        
        let mut decoder = GzDecoder::new(compressed_data);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        
        debug!("GZIP decompression: {} bytes -> {} bytes", compressed_data.len(), decompressed.len());
        Ok(decompressed)
    }
    
    /// Compress using LZ4
    async fn compress_lz4(&self, data: &[u8]) -> Result<Vec<u8>> {
        let compressed = lz4_flex::compress(data);
        
        debug!("LZ4 compression: {} bytes -> {} bytes", data.len(), compressed.len());
        Ok(compressed)
    }
    
    /// Decompress using LZ4
    async fn decompress_lz4(&self, compressed_data: &[u8]) -> Result<Vec<u8>> {
        let decompressed = lz4_flex::decompress(compressed_data, 1_000_000)?; // 1MB max
        
        debug!("LZ4 decompression: {} bytes -> {} bytes", compressed_data.len(), decompressed.len());
        Ok(decompressed)
    }
    
    /// Compress using Zstandard
    async fn compress_zstd(&self, data: &[u8]) -> Result<Vec<u8>> {
        let compressed = zstd::compress(data, 3); // Compression level 3
        
        debug!("ZSTD compression: {} bytes -> {} bytes", data.len(), compressed.len());
        Ok(compressed)
    }
    
    /// Decompress using Zstandard
    async fn decompress_zstd(&self, compressed_data: &[u8]) -> Result<Vec<u8>> {
        let decompressed = zstd::decompress(compressed_data, 1_000_000)?; // 1MB max
        
        debug!("ZSTD decompression: {} bytes -> {} bytes", compressed_data.len(), decompressed.len());
        Ok(decompressed)
    }
    
    /// Extract compression algorithm from metadata
    fn extract_compression_algorithm(&self, metadata: &Value) -> Result<CompressionAlgorithm> {
        if let Some(compression_str) = metadata.get("compression") {
            if let Some(compression_str) = compression_str.as_str() {
                return match compression_str {
                    "Gzip" => Ok(CompressionAlgorithm::Gzip),
                    "Lz4" => Ok(CompressionAlgorithm::Lz4),
                    "Zstd" => Ok(CompressionAlgorithm::Zstd),
                    "None" => Ok(CompressionAlgorithm::None),
                    _ => Ok(CompressionAlgorithm::Zstd), // Default to Zstd
                };
            }
        }
        
        Ok(CompressionAlgorithm::Zstd) // Default
    }
    
    /// Get compression statistics
    pub async fn get_compression_stats(&self, data: &[u8], algorithm: &CompressionAlgorithm) -> Result<CompressionStats> {
        let compressed = self.compress(data, algorithm).await?;
        
        Ok(CompressionStats {
            original_size: data.len() as u64,
            compressed_size: compressed.len() as u64,
            compression_ratio: data.len() as f64 / compressed.len() as f64,
            algorithm: algorithm.clone(),
        })
    }
    
    /// Detect best compression algorithm for data
    pub async fn detect_best_algorithm(&self, data: &[u8]) -> Result<CompressionAlgorithm> {
        let algorithms = [
            CompressionAlgorithm::None,
            CompressionAlgorithm::Gzip,
            CompressionAlgorithm::Lz4,
            CompressionAlgorithm::Zstd,
        ];
        
        let mut best_algorithm = CompressionAlgorithm::None;
        let mut best_ratio = 1.0;
        
        for algorithm in &algorithms {
            let stats = self.get_compression_stats(data, algorithm).await?;
            
            if stats.compression_ratio > best_ratio {
                best_ratio = stats.compression_ratio;
                best_algorithm = algorithm.clone();
            }
        }
        
        info!("Detected best compression algorithm: {:?}", best_algorithm);
        Ok(best_algorithm)
    }
}

/// Compression statistics
#[derive(Debug, Clone)]
pub struct CompressionStats {
    pub original_size: u64,
    pub compressed_size: u64,
    pub compression_ratio: f64,
    pub algorithm: CompressionAlgorithm,
}