//! Configuration Persistence
//! 
//! This module handles configuration persistence, storage, and loading mechanisms
//! including serialization, deserialization, and storage management.

#![no_std]

use alloc::vec::Vec;
use alloc::string::String;
use alloc::collections::HashMap;
use spin::RwLock;

use super::{ConfigKey, ConfigEntry, ConfigValue, ConfigResult, ConfigError};

/// Configuration storage manager
pub struct ConfigStorage {
    storage_backend: StorageBackend,
    storage_path: String,
    compression_enabled: bool,
    encryption_enabled: bool,
    max_storage_size: usize,
    current_storage_size: RwLock<usize>,
}

/// Storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Filesystem = 0,
    Database = 1,
    InMemory = 2,
    KeyValue = 3,
}

/// Storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Json = 0,
    Binary = 1,
    Custom = 2,
}

/// Storage metadata
#[derive(Debug, Clone)]
pub struct StorageMetadata {
    pub backend: StorageBackend,
    pub format: StorageFormat,
    pub created_at: u64,
    pub modified_at: u64,
    pub version: u32,
    pub checksum: u32,
    pub compressed: bool,
    pub encrypted: bool,
    pub size: usize,
}

/// Storage statistics
#[derive(Debug, Clone)]
pub struct StorageStats {
    pub total_reads: usize,
    pub total_writes: usize,
    pub failed_reads: usize,
    pub failed_writes: usize,
    pub average_read_time_us: u64,
    pub average_write_time_us: u64,
    pub storage_efficiency: f32,
    pub compression_ratio: f32,
}

impl ConfigStorage {
    /// Create a new configuration storage manager
    pub fn new() -> Self {
        ConfigStorage {
            storage_backend: StorageBackend::Filesystem,
            storage_path: "/multios/config/system".to_string(),
            compression_enabled: false,
            encryption_enabled: false,
            max_storage_size: 10 * 1024 * 1024, // 10MB
            current_storage_size: RwLock::new(0),
        }
    }

    /// Initialize the storage system
    pub fn init(&self) -> ConfigResult<()> {
        // Initialize the storage backend
        match self.storage_backend {
            StorageBackend::Filesystem => self.init_filesystem()?,
            StorageBackend::Database => self.init_database()?,
            StorageBackend::InMemory => self.init_memory()?,
            StorageBackend::KeyValue => self.init_keyvalue()?,
        }

        info!("Storage system initialized: {:?}", self.storage_backend);
        Ok(())
    }

    /// Serialize configuration data
    pub fn serialize_config(&self, config_data: &HashMap<ConfigKey, ConfigEntry>) -> ConfigResult<Vec<u8>> {
        let start_time = super::get_current_time();

        let serialized = match self.get_storage_format() {
            StorageFormat::Json => self.serialize_json(config_data)?,
            StorageFormat::Binary => self.serialize_binary(config_data)?,
            StorageFormat::Custom => self.serialize_custom(config_data)?,
        };

        // Apply compression if enabled
        let processed_data = if self.compression_enabled {
            self.compress_data(&serialized)?
        } else {
            serialized
        };

        // Apply encryption if enabled
        let final_data = if self.encryption_enabled {
            self.encrypt_data(&processed_data)?
        } else {
            processed_data
        };

        // Update storage size
        let mut size = self.current_storage_size.write();
        *size = final_data.len();

        let end_time = super::get_current_time();
        let duration = end_time - start_time;

        info!("Configuration serialized in {}μs, size: {} bytes", duration, final_data.len());
        Ok(final_data)
    }

    /// Deserialize configuration data
    pub fn deserialize_config(&self, data: &[u8]) -> ConfigResult<HashMap<ConfigKey, ConfigEntry>> {
        let start_time = super::get_current_time();

        // Decrypt if necessary
        let decrypted_data = if self.encryption_enabled {
            self.decrypt_data(data)?
        } else {
            data.to_vec()
        };

        // Decompress if necessary
        let decompressed_data = if self.compression_enabled {
            self.decompress_data(&decrypted_data)?
        } else {
            decrypted_data
        };

        let deserialized = match self.get_storage_format() {
            StorageFormat::Json => self.deserialize_json(&decompressed_data)?,
            StorageFormat::Binary => self.deserialize_binary(&decompressed_data)?,
            StorageFormat::Custom => self.deserialize_custom(&decompressed_data)?,
        };

        let end_time = super::get_current_time();
        let duration = end_time - start_time;

        info!("Configuration deserialized in {}μs, entries: {}", duration, deserialized.len());
        Ok(deserialized)
    }

    /// Save configuration to persistent storage
    pub fn save_config(&self, data: &[u8]) -> ConfigResult<()> {
        let start_time = super::get_current_time();

        // Check size limits
        if data.len() > self.max_storage_size {
            return Err(ConfigError::ResourceExhausted);
        }

        match self.storage_backend {
            StorageBackend::Filesystem => self.save_to_filesystem(data),
            StorageBackend::Database => self.save_to_database(data),
            StorageBackend::InMemory => self.save_to_memory(data),
            StorageBackend::KeyValue => self.save_to_keyvalue(data),
        }?;

        let end_time = super::get_current_time();
        let duration = end_time - start_time;

        info!("Configuration saved in {}μs", duration);
        Ok(())
    }

    /// Load configuration from persistent storage
    pub fn load_config(&self) -> ConfigResult<Vec<u8>> {
        let start_time = super::get_current_time();

        let data = match self.storage_backend {
            StorageBackend::Filesystem => self.load_from_filesystem()?,
            StorageBackend::Database => self.load_from_database()?,
            StorageBackend::InMemory => self.load_from_memory()?,
            StorageBackend::KeyValue => self.load_from_keyvalue()?,
        };

        let end_time = super::get_current_time();
        let duration = end_time - start_time;

        info!("Configuration loaded in {}μs, size: {} bytes", duration, data.len());
        Ok(data)
    }

    /// Backup configuration
    pub fn backup_config(&self, backup_path: &str) -> ConfigResult<()> {
        let current_data = self.load_config()?;
        self.save_backup(backup_path, &current_data)
    }

    /// Restore configuration
    pub fn restore_config(&self, backup_path: &str) -> ConfigResult<Vec<u8>> {
        self.load_backup(backup_path)
    }

    /// Verify configuration integrity
    pub fn verify_integrity(&self, data: &[u8]) -> ConfigResult<bool> {
        let checksum = self.calculate_checksum(data);
        // In a real implementation, we'd store and compare checksums
        Ok(checksum != 0)
    }

    /// Get storage metadata
    pub fn get_metadata(&self) -> ConfigResult<StorageMetadata> {
        let timestamp = super::get_current_time();
        
        Ok(StorageMetadata {
            backend: self.storage_backend,
            format: self.get_storage_format(),
            created_at: timestamp,
            modified_at: timestamp,
            version: 1,
            checksum: 0, // Would be calculated
            compressed: self.compression_enabled,
            encrypted: self.encryption_enabled,
            size: *self.current_storage_size.read(),
        })
    }

    /// Get storage statistics
    pub fn get_stats(&self) -> StorageStats {
        StorageStats {
            total_reads: 0, // Would track actual statistics
            total_writes: 0,
            failed_reads: 0,
            failed_writes: 0,
            average_read_time_us: 100, // Mock data
            average_write_time_us: 200,
            storage_efficiency: 0.85,
            compression_ratio: if self.compression_enabled { 0.7 } else { 1.0 },
        }
    }

    /// Set storage backend
    pub fn set_backend(&mut self, backend: StorageBackend) {
        self.storage_backend = backend;
    }

    /// Set storage path
    pub fn set_path(&mut self, path: &str) {
        self.storage_path = path.to_string();
    }

    /// Enable compression
    pub fn enable_compression(&mut self, enabled: bool) {
        self.compression_enabled = enabled;
    }

    /// Enable encryption
    pub fn enable_encryption(&mut self, enabled: bool) {
        self.encryption_enabled = enabled;
    }

    /// Internal methods for different storage backends
    fn init_filesystem(&self) -> ConfigResult<()> {
        // Would initialize filesystem storage
        info!("Filesystem storage initialized");
        Ok(())
    }

    fn init_database(&self) -> ConfigResult<()> {
        // Would initialize database storage
        info!("Database storage initialized");
        Ok(())
    }

    fn init_memory(&self) -> ConfigResult<()> {
        // Would initialize in-memory storage
        info!("Memory storage initialized");
        Ok(())
    }

    fn init_keyvalue(&self) -> ConfigResult<()> {
        // Would initialize key-value storage
        info!("Key-value storage initialized");
        Ok(())
    }

    fn get_storage_format(&self) -> StorageFormat {
        // In a real implementation, this would be configurable
        StorageFormat::Json
    }

    /// JSON serialization
    fn serialize_json(&self, config_data: &HashMap<ConfigKey, ConfigEntry>) -> ConfigResult<Vec<u8>> {
        // Simplified JSON serialization
        // In a real implementation, would use proper JSON library
        let mut result = Vec::new();
        
        for (key, entry) in config_data {
            result.extend_from_slice(key.path.as_bytes());
            result.push(b'=');
            result.extend_from_slice(format!("{:?}", entry.value).as_bytes());
            result.push(b'\n');
        }
        
        Ok(result)
    }

    /// JSON deserialization
    fn deserialize_json(&self, data: &[u8]) -> ConfigResult<HashMap<ConfigKey, ConfigEntry>> {
        // Simplified JSON deserialization
        let mut result = HashMap::new();
        let content = String::from_utf8_lossy(data);
        
        for line in content.lines() {
            if let Some(separator_pos) = line.find('=') {
                let key_str = &line[..separator_pos];
                let value_str = &line[separator_pos + 1..];
                
                let key_parts: Vec<&str> = key_str.split('.').collect();
                if key_parts.len() >= 2 {
                    let key = ConfigKey {
                        namespace: key_parts[0].to_string(),
                        key: key_parts[1].to_string(),
                        path: key_str.to_string(),
                    };
                    
                    let entry = ConfigEntry {
                        key: key.clone(),
                        value: ConfigValue::String(value_str.to_string()),
                        value_type: super::ConfigType::String,
                        description: None,
                        default_value: None,
                        read_only: false,
                        system: false,
                        persistent: true,
                        last_modified: super::get_current_time(),
                        version: 1,
                        checksum: 0,
                    };
                    
                    result.insert(key, entry);
                }
            }
        }
        
        Ok(result)
    }

    /// Binary serialization
    fn serialize_binary(&self, config_data: &HashMap<ConfigKey, ConfigEntry>) -> ConfigResult<Vec<u8>> {
        // Would implement binary serialization
        // For now, use JSON
        self.serialize_json(config_data)
    }

    /// Binary deserialization
    fn deserialize_binary(&self, data: &[u8]) -> ConfigResult<HashMap<ConfigKey, ConfigEntry>> {
        // Would implement binary deserialization
        // For now, use JSON
        self.deserialize_json(data)
    }

    /// Custom serialization
    fn serialize_custom(&self, config_data: &HashMap<ConfigKey, ConfigEntry>) -> ConfigResult<Vec<u8>> {
        // Would implement custom serialization format
        self.serialize_json(config_data)
    }

    /// Custom deserialization
    fn deserialize_custom(&self, data: &[u8]) -> ConfigResult<HashMap<ConfigKey, ConfigEntry>> {
        // Would implement custom deserialization
        self.deserialize_json(data)
    }

    /// Compress data
    fn compress_data(&self, data: &[u8]) -> ConfigResult<Vec<u8>> {
        // Would implement compression
        // For now, return data as-is
        Ok(data.to_vec())
    }

    /// Decompress data
    fn decompress_data(&self, data: &[u8]) -> ConfigResult<Vec<u8>> {
        // Would implement decompression
        Ok(data.to_vec())
    }

    /// Encrypt data
    fn encrypt_data(&self, data: &[u8]) -> ConfigResult<Vec<u8>> {
        // Would implement encryption
        Ok(data.to_vec())
    }

    /// Decrypt data
    fn decrypt_data(&self, data: &[u8]) -> ConfigResult<Vec<u8>> {
        // Would implement decryption
        Ok(data.to_vec())
    }

    /// Calculate checksum
    fn calculate_checksum(&self, data: &[u8]) -> u32 {
        // Simple checksum calculation
        // In a real implementation, would use CRC32 or similar
        let mut checksum = 0u32;
        for &byte in data {
            checksum = checksum.wrapping_add(byte as u32);
        }
        checksum
    }

    /// Storage backend implementations
    fn save_to_filesystem(&self, data: &[u8]) -> ConfigResult<()> {
        // Would save to filesystem
        info!("Saving configuration to filesystem: {} bytes", data.len());
        Ok(())
    }

    fn load_from_filesystem(&self) -> ConfigResult<Vec<u8>> {
        // Would load from filesystem
        info!("Loading configuration from filesystem");
        Ok(Vec::new())
    }

    fn save_to_database(&self, data: &[u8]) -> ConfigResult<()> {
        // Would save to database
        info!("Saving configuration to database: {} bytes", data.len());
        Ok(())
    }

    fn load_from_database(&self) -> ConfigResult<Vec<u8>> {
        // Would load from database
        info!("Loading configuration from database");
        Ok(Vec::new())
    }

    fn save_to_memory(&self, data: &[u8]) -> ConfigResult<()> {
        // Would save to memory
        info!("Saving configuration to memory: {} bytes", data.len());
        Ok(())
    }

    fn load_from_memory(&self) -> ConfigResult<Vec<u8>> {
        // Would load from memory
        info!("Loading configuration from memory");
        Ok(Vec::new())
    }

    fn save_to_keyvalue(&self, data: &[u8]) -> ConfigResult<()> {
        // Would save to key-value store
        info!("Saving configuration to key-value store: {} bytes", data.len());
        Ok(())
    }

    fn load_from_keyvalue(&self) -> ConfigResult<Vec<u8>> {
        // Would load from key-value store
        info!("Loading configuration from key-value store");
        Ok(Vec::new())
    }

    /// Backup operations
    fn save_backup(&self, backup_path: &str, data: &[u8]) -> ConfigResult<()> {
        // Would create backup file
        info!("Creating backup at {}: {} bytes", backup_path, data.len());
        Ok(())
    }

    fn load_backup(&self, backup_path: &str) -> ConfigResult<Vec<u8>> {
        // Would load backup file
        info!("Loading backup from {}", backup_path);
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_creation() {
        let storage = ConfigStorage::new();
        assert_eq!(storage.storage_backend, StorageBackend::Filesystem);
    }

    #[test]
    fn test_metadata_creation() {
        let metadata = StorageMetadata {
            backend: StorageBackend::Database,
            format: StorageFormat::Binary,
            created_at: 1000000,
            modified_at: 1000000,
            version: 1,
            checksum: 0,
            compressed: true,
            encrypted: true,
            size: 1024,
        };

        assert_eq!(metadata.backend, StorageBackend::Database);
        assert!(metadata.compressed);
        assert!(metadata.encrypted);
    }

    #[test]
    fn test_checksum_calculation() {
        let storage = ConfigStorage::new();
        let data = b"test data";
        let checksum = storage.calculate_checksum(data);
        
        assert!(checksum > 0);
    }
}