//! MultiOS Package Manager - Storage Module
//! 
//! This module provides comprehensive storage and caching capabilities
//! for packages, metadata, and repository data.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PackageError, types::{Package, Repository, Version, Architecture}};
use super::core::types::Dependency;

/// Package storage and caching system
#[derive(Debug)]
pub struct PackageStorage {
    base_path: PathBuf,
    packages_path: PathBuf,
    metadata_path: PathBuf,
    cache_path: PathBuf,
    temp_path: PathBuf,
    database: Arc<RocksDB>,
    cache: Arc<RocksDB>,
    write_queue: Arc<RwLock<WriteQueue>>,
}

impl PackageStorage {
    /// Create new package storage instance
    pub fn new(base_path: PathBuf) -> Result<Self, PackageError> {
        let packages_path = base_path.join("packages");
        let metadata_path = base_path.join("metadata");
        let cache_path = base_path.join("cache");
        let temp_path = base_path.join("temp");
        
        // Create directories
        std::fs::create_dir_all(&packages_path)
            .map_err(|e| PackageError::IoError(e))?;
        std::fs::create_dir_all(&metadata_path)
            .map_err(|e| PackageError::IoError(e))?;
        std::fs::create_dir_all(&cache_path)
            .map_err(|e| PackageError::IoError(e))?;
        std::fs::create_dir_all(&temp_path)
            .map_err(|e| PackageError::IoError(e))?;
        
        let database = Arc::new(RocksDB::new(base_path.join("data.db"))?);
        let cache = Arc::new(RocksDB::new(base_path.join("cache.db"))?);
        
        Ok(Self {
            base_path,
            packages_path,
            metadata_path,
            cache_path,
            temp_path,
            database,
            cache,
            write_queue: Arc::new(RwLock::new(WriteQueue::new())),
        })
    }
    
    /// Store a package file
    pub async fn store_package(&self, repository_id: String, package: &Package, data: &[u8]) -> Result<PathBuf, PackageError> {
        let package_filename = format!("{}-{}-{}.tar.xz", package.name, package.version, package.architecture);
        let repository_packages_path = self.packages_path.join(&repository_id);
        let package_path = repository_packages_path.join(&package_filename);
        
        // Create repository-specific directory
        std::fs::create_dir_all(&repository_packages_path)
            .map_err(|e| PackageError::IoError(e))?;
        
        // Write package file
        tokio::fs::write(&package_path, data)
            .await
            .map_err(|e| PackageError::IoError(e))?;
        
        // Update package metadata in database
        self.store_package_metadata(repository_id, package).await?;
        
        // Update cache
        self.update_cache_entry(package).await?;
        
        log::info!("Stored package: {} at {}", package.name, package_path.display());
        Ok(package_path)
    }
    
    /// Get package path from storage
    pub async fn get_package_path(&self, repository_id: String, package: &Package) -> Result<PathBuf, PackageError> {
        let package_filename = format!("{}-{}-{}.tar.xz", package.name, package.version, package.architecture);
        let repository_packages_path = self.packages_path.join(&repository_id);
        let package_path = repository_packages_path.join(package_filename);
        
        if package_path.exists() {
            Ok(package_path)
        } else {
            Err(PackageError::PackageNotFound(package.name.clone()))
        }
    }
    
    /// Extract package contents
    pub async fn extract_package(&self, package_path: &Path, destination: &Path) -> Result<(), PackageError> {
        use tar::Archive;
        use flate2::read::GzDecoder;
        
        let file = tokio::fs::File::open(package_path).await
            .map_err(|e| PackageError::IoError(e))?;
        let reader = tokio_util::codec::FramedRead::new(file, tokio_util::codec::BytesCodec::new());
        
        // For simplicity, this is a synchronous implementation
        // In a real implementation, you'd want proper async tar extraction
        let file = std::fs::File::open(package_path)
            .map_err(|e| PackageError::IoError(e))?;
        
        let mut archive = Archive::new(GzDecoder::new(file));
        archive.unpack(destination)
            .map_err(|e| PackageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        
        Ok(())
    }
    
    /// Store package metadata in database
    async fn store_package_metadata(&self, repository_id: String, package: &Package) -> Result<(), PackageError> {
        let key = format!("{}:{}", repository_id, package.name);
        let value = serde_json::to_vec(package)
            .map_err(|e| PackageError::JsonError(e))?;
        
        self.database.put(&key, &value)
            .map_err(|e| PackageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        
        Ok(())
    }
    
    /// Get package metadata from database
    pub async fn get_package_metadata(&self, repository_id: String, name: &str, version: Option<&Version>) -> Result<Option<Package>, PackageError> {
        let key = format!("{}:{}", repository_id, name);
        
        let value = self.database.get(&key)
            .map_err(|e| PackageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        
        if let Some(value) = value {
            let package: Package = serde_json::from_slice(&value)
                .map_err(|e| PackageError::JsonError(e))?;
            
            // If version is specified, verify it matches
            if let Some(version) = version {
                if &package.version == version {
                    Ok(Some(package))
                } else {
                    Ok(None)
                }
            } else {
                Ok(Some(package))
            }
        } else {
            Ok(None)
        }
    }
    
    /// Update cache entry
    async fn update_cache_entry(&self, package: &Package) -> Result<(), PackageError> {
        let cache_key = format!("package:{}:{}", package.name, package.version);
        let cache_value = serde_json::to_vec(package)
            .map_err(|e| PackageError::JsonError(e))?;
        
        self.cache.put(&cache_key, &cache_value)
            .map_err(|e| PackageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        
        Ok(())
    }
    
    /// Clean up repository data
    pub async fn cleanup_repository(&self, repository_id: &str) -> Result<(), PackageError> {
        let repo_path = self.packages_path.join(repository_id);
        
        if repo_path.exists() {
            tokio::fs::remove_dir_all(&repo_path)
                .await
                .map_err(|e| PackageError::IoError(e))?;
        }
        
        // Clean up database entries
        // This would require iterating through all entries and removing those with the repository ID
        // For now, it's a placeholder
        
        log::info!("Cleaned up repository data: {}", repository_id);
        Ok(())
    }
    
    /// Get package list for repository
    pub async fn list_packages(&self, repository_id: String) -> Result<Vec<Package>, PackageError> {
        let mut packages = Vec::new();
        
        // This would query the database for all packages in the repository
        // Placeholder implementation
        Ok(packages)
    }
    
    /// Search packages in storage
    pub async fn search_packages(&self, query: &SearchQuery) -> Result<Vec<Package>, PackageError> {
        // This would search through stored packages
        // Placeholder implementation
        Ok(Vec::new())
    }
    
    /// Get package statistics
    pub async fn get_statistics(&self) -> Result<StorageStatistics, PackageError> {
        // Calculate storage statistics
        let mut total_packages = 0;
        let mut total_size = 0u64;
        
        // Count packages and calculate size
        for entry in std::fs::read_dir(&self.packages_path)
            .map_err(|e| PackageError::IoError(e))? {
            let entry = entry.map_err(|e| PackageError::IoError(e))?;
            let metadata = entry.metadata().map_err(|e| PackageError::IoError(e))?;
            
            if metadata.is_file() {
                total_packages += 1;
                total_size += metadata.len();
            }
        }
        
        Ok(StorageStatistics {
            total_packages,
            total_size,
            cache_size: 0, // Would calculate from cache database
            repositories: self.repositories_count().await?,
            last_updated: Utc::now(),
        })
    }
    
    async fn repositories_count(&self) -> Result<u32, PackageError> {
        let count = std::fs::read_dir(&self.packages_path)
            .map_err(|e| PackageError::IoError(e))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.metadata().ok().map(|m| m.is_dir()).unwrap_or(false))
            .count() as u32;
        
        Ok(count)
    }
}

/// Metadata cache for repository operations
#[derive(Debug)]
pub struct MetadataCache {
    cache_path: PathBuf,
    index_file: PathBuf,
    packages_index: Arc<RocksDB>,
    repository_cache: HashMap<String, RepositoryCacheInfo>,
    cache_lock: Arc<RwLock<()>>,
}

impl MetadataCache {
    /// Create new metadata cache
    pub fn new(cache_path: PathBuf) -> Result<Self, PackageError> {
        std::fs::create_dir_all(&cache_path)
            .map_err(|e| PackageError::IoError(e))?;
        
        let index_file = cache_path.join("index.json");
        let packages_index = Arc::new(RocksDB::new(cache_path.join("packages.db"))?);
        
        Ok(Self {
            cache_path,
            index_file,
            packages_index,
            repository_cache: HashMap::new(),
            cache_lock: Arc::new(RwLock::new(())),
        })
    }
    
    /// Update package metadata in cache
    pub async fn update_package(&self, repository_id: String, package: &Package) -> Result<(), PackageError> {
        let _lock = self.cache_lock.read().await;
        
        let cache_key = format!("{}:{}", repository_id, package.name);
        let package_data = serde_json::to_vec(package)
            .map_err(|e| PackageError::JsonError(e))?;
        
        self.packages_index.put(&cache_key, &package_data)
            .map_err(|e| PackageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        
        Ok(())
    }
    
    /// Search metadata cache
    pub async fn search_metadata(&self, repository_id: String, query: &SearchQuery) -> Result<Option<Vec<Package>>, PackageError> {
        let _lock = self.cache_lock.read().await;
        
        // This would search through the cached metadata
        // Placeholder implementation
        Ok(None)
    }
    
    /// Get package metadata from cache
    pub async fn get_package_metadata(&self, repository_id: String, name: &str, version: Option<&Version>) -> Result<Option<Package>, PackageError> {
        let _lock = self.cache_lock.read().await;
        
        let cache_key = format!("{}:{}", repository_id, name);
        let package_data = self.packages_index.get(&cache_key)
            .map_err(|e| PackageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        
        if let Some(data) = package_data {
            let package: Package = serde_json::from_slice(&data)
                .map_err(|e| PackageError::JsonError(e))?;
            
            if let Some(version) = version {
                if &package.version == version {
                    Ok(Some(package))
                } else {
                    Ok(None)
                }
            } else {
                Ok(Some(package))
            }
        } else {
            Ok(None)
        }
    }
    
    /// Get package versions from cache
    pub async fn get_package_versions(&self, repository_id: String, name: &str) -> Result<Vec<Version>, PackageError> {
        let _lock = self.cache_lock.read().await;
        
        // This would return all versions of the package from cache
        // Placeholder implementation
        Ok(Vec::new())
    }
    
    /// Clear cache
    pub async fn clear_cache(&self) -> Result<(), PackageError> {
        let _lock = self.cache_lock.write().await;
        
        // Clear all cache entries
        // Placeholder implementation
        Ok(())
    }
}

/// Write queue for async operations
#[derive(Debug)]
struct WriteQueue {
    pending_writes: Vec<WriteOperation>,
}

impl WriteQueue {
    fn new() -> Self {
        Self {
            pending_writes: Vec::new(),
        }
    }
    
    async fn add_write(&mut self, operation: WriteOperation) {
        self.pending_writes.push(operation);
    }
    
    async fn process_queue(&mut self) {
        // Process all pending writes
        // This would handle batch processing of write operations
        self.pending_writes.clear();
    }
}

/// Write operation types
#[derive(Debug)]
enum WriteOperation {
    StorePackage { repository_id: String, package_data: Vec<u8> },
    UpdateMetadata { key: String, data: Vec<u8> },
    Cleanup { target: String },
}

/// Repository cache information
#[derive(Debug, Clone)]
struct RepositoryCacheInfo {
    last_updated: DateTime<Utc>,
    package_count: u32,
    cache_valid: bool,
}

/// Storage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageStatistics {
    pub total_packages: u32,
    pub total_size: u64,
    pub cache_size: u64,
    pub repositories: u32,
    pub last_updated: DateTime<Utc>,
}

/// Package search query (simplified)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub version: Option<Version>,
    pub architecture: Option<Architecture>,
}

/// RocksDB wrapper (simplified implementation)
#[derive(Debug)]
struct RocksDB {
    db: rocksdb::DB,
}

impl RocksDB {
    fn new(path: PathBuf) -> Result<Self, std::io::Error> {
        let db = rocksdb::DB::open_default(path)?;
        Ok(Self { db })
    }
    
    fn put(&self, key: &str, value: &[u8]) -> Result<(), std::io::Error> {
        self.db.put(key, value)?;
        Ok(())
    }
    
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, std::io::Error> {
        let result = self.db.get(key)?;
        Ok(result)
    }
    
    fn delete(&self, key: &str) -> Result<(), std::io::Error> {
        self.db.delete(key)?;
        Ok(())
    }
}