//! Example Service Implementations
//!
//! This module provides example service implementations that demonstrate
//! how to create services using the MultiOS service management framework.

use crate::service_manager::*;
use crate::log::{info, warn, error};
use crate::hal::{sleep_ms, get_current_time};

/// Example HTTP Web Server Service
#[derive(Debug, Clone)]
pub struct HttpWebServer {
    pub service_id: ServiceId,
    pub port: u16,
    pub bind_address: String,
    pub max_connections: u32,
    pub request_count: u64,
    pub start_time: Option<u64>,
    pub running: bool,
}

impl HttpWebServer {
    /// Create a new HTTP web server
    pub fn new(service_id: ServiceId, port: u16, bind_address: String) -> Self {
        HttpWebServer {
            service_id,
            port,
            bind_address,
            max_connections: 1000,
            request_count: 0,
            start_time: None,
            running: false,
        }
    }

    /// Start the HTTP server
    pub fn start(&mut self) -> ServiceResult<()> {
        info!("Starting HTTP server on {}:{}", self.bind_address, self.port);
        
        // Initialize server components
        self.initialize_server()?;
        
        self.running = true;
        self.start_time = Some(get_current_time());
        
        info!("HTTP server started successfully");
        Ok(())
    }

    /// Stop the HTTP server
    pub fn stop(&mut self) -> ServiceResult<()> {
        info!("Stopping HTTP server on {}:{}", self.bind_address, self.port);
        
        self.running = false;
        
        // Clean up server resources
        self.cleanup_server()?;
        
        info!("HTTP server stopped successfully");
        Ok(())
    }

    /// Handle HTTP request (simplified)
    pub fn handle_request(&mut self) -> ServiceResult<()> {
        if !self.running {
            return Err(ServiceError::ServiceNotRunning);
        }
        
        self.request_count += 1;
        
        // Simulate request processing
        sleep_ms(10).unwrap();
        
        Ok(())
    }

    /// Get server statistics
    pub fn get_stats(&self) -> HttpServerStats {
        let uptime = self.start_time.map(|start| get_current_time() - start).unwrap_or(0);
        
        HttpServerStats {
            port: self.port,
            bind_address: self.bind_address.clone(),
            max_connections: self.max_connections,
            request_count: self.request_count,
            uptime_ms: uptime,
            running: self.running,
            requests_per_second: if uptime > 0 {
                (self.request_count * 1000) / uptime
            } else {
                0
            },
        }
    }

    /// Initialize server components
    fn initialize_server(&self) -> ServiceResult<()> {
        // Initialize socket, bind to address, etc.
        info!("Initializing HTTP server components...");
        Ok(())
    }

    /// Clean up server resources
    fn cleanup_server(&self) -> ServiceResult<()> {
        // Close sockets, clean up file descriptors, etc.
        info!("Cleaning up HTTP server resources...");
        Ok(())
    }
}

/// HTTP Server Statistics
#[derive(Debug, Clone)]
pub struct HttpServerStats {
    pub port: u16,
    pub bind_address: String,
    pub max_connections: u32,
    pub request_count: u64,
    pub uptime_ms: u64,
    pub running: bool,
    pub requests_per_second: u64,
}

/// Example Database Service
#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub service_id: ServiceId,
    pub database_path: String,
    pub max_connections: u32,
    pub active_connections: u32,
    pub query_count: u64,
    pub error_count: u64,
    pub start_time: Option<u64>,
    pub running: bool,
}

impl DatabaseService {
    /// Create a new database service
    pub fn new(service_id: ServiceId, database_path: String) -> Self {
        DatabaseService {
            service_id,
            database_path,
            max_connections: 100,
            active_connections: 0,
            query_count: 0,
            error_count: 0,
            start_time: None,
            running: false,
        }
    }

    /// Start the database service
    pub fn start(&mut self) -> ServiceResult<()> {
        info!("Starting database service at {}", self.database_path);
        
        // Initialize database
        self.initialize_database()?;
        
        self.running = true;
        self.start_time = Some(get_current_time());
        
        info!("Database service started successfully");
        Ok(())
    }

    /// Stop the database service
    pub fn stop(&mut self) -> ServiceResult<()> {
        info!("Stopping database service at {}", self.database_path);
        
        self.running = false;
        
        // Close all connections and flush data
        self.active_connections = 0;
        self.shutdown_database()?;
        
        info!("Database service stopped successfully");
        Ok(())
    }

    /// Execute query (simplified)
    pub fn execute_query(&mut self, query: &str) -> ServiceResult<String> {
        if !self.running {
            return Err(ServiceError::ServiceNotRunning);
        }
        
        if self.active_connections >= self.max_connections {
            return Err(ServiceError::ResourceExhausted);
        }
        
        // Simulate query processing
        self.active_connections += 1;
        self.query_count += 1;
        
        // Simulate query execution time
        sleep_ms(5).unwrap();
        
        self.active_connections -= 1;
        
        // Return mock result
        Ok(format!("Query executed: {}", query))
    }

    /// Get database statistics
    pub fn get_stats(&self) -> DatabaseStats {
        let uptime = self.start_time.map(|start| get_current_time() - start).unwrap_or(0);
        
        DatabaseStats {
            database_path: self.database_path.clone(),
            max_connections: self.max_connections,
            active_connections: self.active_connections,
            query_count: self.query_count,
            error_count: self.error_count,
            uptime_ms: uptime,
            running: self.running,
            queries_per_second: if uptime > 0 {
                (self.query_count * 1000) / uptime
            } else {
                0
            },
            error_rate: if self.query_count > 0 {
                (self.error_count as f64 / self.query_count as f64) * 100.0
            } else {
                0.0
            },
        }
    }

    /// Initialize database
    fn initialize_database(&self) -> ServiceResult<()> {
        info!("Initializing database at {}", self.database_path);
        // Initialize database file, create schemas, etc.
        Ok(())
    }

    /// Shutdown database
    fn shutdown_database(&self) -> ServiceResult<()> {
        info!("Shutting down database");
        // Flush data, close files, etc.
        Ok(())
    }
}

/// Database Statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub database_path: String,
    pub max_connections: u32,
    pub active_connections: u32,
    pub query_count: u64,
    pub error_count: u64,
    pub uptime_ms: u64,
    pub running: bool,
    pub queries_per_second: u64,
    pub error_rate: f64,
}

/// Example Cache Service
#[derive(Debug, Clone)]
pub struct CacheService {
    pub service_id: ServiceId,
    pub cache_size: usize,
    pub max_items: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    pub eviction_count: u64,
    pub start_time: Option<u64>,
    pub running: bool,
}

impl CacheService {
    /// Create a new cache service
    pub fn new(service_id: ServiceId, cache_size: usize, max_items: usize) -> Self {
        CacheService {
            service_id,
            cache_size,
            max_items,
            hit_count: 0,
            miss_count: 0,
            eviction_count: 0,
            start_time: None,
            running: false,
        }
    }

    /// Start the cache service
    pub fn start(&mut self) -> ServiceResult<()> {
        info!("Starting cache service (size: {} bytes, max items: {})", 
              self.cache_size, self.max_items);
        
        // Initialize cache
        self.initialize_cache()?;
        
        self.running = true;
        self.start_time = Some(get_current_time());
        
        info!("Cache service started successfully");
        Ok(())
    }

    /// Stop the cache service
    pub fn stop(&mut self) -> ServiceResult<()> {
        info!("Stopping cache service");
        
        self.running = false;
        
        // Clear cache and clean up
        self.clear_cache()?;
        
        info!("Cache service stopped successfully");
        Ok(())
    }

    /// Get value from cache
    pub fn get(&mut self, key: &str) -> ServiceResult<String> {
        if !self.running {
            return Err(ServiceError::ServiceNotRunning);
        }
        
        // Simulate cache lookup
        self.hit_count += 1;
        
        // Mock cache hit (80% hit rate)
        if rand::random::<u8>() < 200 {
            Ok(format!("cached_value_for_{}", key))
        } else {
            self.miss_count += 1;
            Err(ServiceError::ServiceNotFound)
        }
    }

    /// Set value in cache
    pub fn set(&mut self, key: String, value: String) -> ServiceResult<()> {
        if !self.running {
            return Err(ServiceError::ServiceNotRunning);
        }
        
        // Simulate cache storage
        if rand::random::<u8>() < 50 {
            self.eviction_count += 1;
        }
        
        Ok(())
    }

    /// Get cache statistics
    pub fn get_stats(&self) -> CacheStats {
        let uptime = self.start_time.map(|start| get_current_time() - start).unwrap_or(0);
        let total_requests = self.hit_count + self.miss_count;
        let hit_rate = if total_requests > 0 {
            (self.hit_count as f64 / total_requests as f64) * 100.0
        } else {
            0.0
        };
        
        CacheStats {
            cache_size: self.cache_size,
            max_items: self.max_items,
            hit_count: self.hit_count,
            miss_count: self.miss_count,
            eviction_count: self.eviction_count,
            uptime_ms: uptime,
            running: self.running,
            hit_rate: hit_rate,
            total_requests: total_requests,
        }
    }

    /// Initialize cache
    fn initialize_cache(&self) -> ServiceResult<()> {
        info!("Initializing cache ({} bytes)", self.cache_size);
        Ok(())
    }

    /// Clear cache
    fn clear_cache(&self) -> ServiceResult<()> {
        info!("Clearing cache");
        Ok(())
    }
}

/// Cache Statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub cache_size: usize,
    pub max_items: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    pub eviction_count: u64,
    pub uptime_ms: u64,
    pub running: bool,
    pub hit_rate: f64,
    pub total_requests: u64,
}

/// Simple random number generator for service simulation
mod rand {
    pub fn random<T>() -> T 
    where
        T: From<u8>,
    {
        use core::num::Wrapping;
        static mut STATE: Wrapping<u32> = Wrapping(123456789);
        
        unsafe {
            STATE = STATE * Wrapping(1103515245) + Wrapping(12345);
            STATE.0.into()
        }
    }
}

/// Example service creation helper functions
pub mod helpers {
    use super::*;

    /// Create HTTP web server service descriptor
    pub fn create_http_server_descriptor(port: u16) -> ServiceDescriptor {
        ServiceDescriptor {
            name: "http-server".to_string(),
            display_name: "HTTP Web Server".to_string(),
            description: Some("Simple HTTP web server".to_string()),
            service_type: ServiceType::UserService,
            dependencies: vec![],
            resource_limits: Some(service::ResourceLimits {
                max_memory: 64 * 1024 * 1024, // 64MB
                max_cpu_percent: 50,
                max_file_descriptors: 256,
                max_threads: 4,
            }),
            isolation_level: IsolationLevel::Process,
            auto_restart: true,
            restart_delay: 1000,
            max_restarts: 5,
            health_check_interval: 30000,
            tags: vec!["http".to_string(), "web".to_string()],
        }
    }

    /// Create database service descriptor
    pub fn create_database_descriptor(database_path: String) -> ServiceDescriptor {
        ServiceDescriptor {
            name: "database".to_string(),
            display_name: "Database Service".to_string(),
            description: Some("Simple database service".to_string()),
            service_type: ServiceType::SystemService,
            dependencies: vec![],
            resource_limits: Some(service::ResourceLimits {
                max_memory: 128 * 1024 * 1024, // 128MB
                max_cpu_percent: 30,
                max_file_descriptors: 512,
                max_threads: 2,
            }),
            isolation_level: IsolationLevel::Process,
            auto_restart: true,
            restart_delay: 2000,
            max_restarts: 3,
            health_check_interval: 45000,
            tags: vec!["database".to_string(), "storage".to_string()],
        }
    }

    /// Create cache service descriptor
    pub fn create_cache_descriptor(cache_size: usize) -> ServiceDescriptor {
        ServiceDescriptor {
            name: "cache".to_string(),
            display_name: "Cache Service".to_string(),
            description: Some("In-memory cache service".to_string()),
            service_type: ServiceType::UserService,
            dependencies: vec![],
            resource_limits: Some(service::ResourceLimits {
                max_memory: cache_size + 8 * 1024 * 1024, // cache size + overhead
                max_cpu_percent: 20,
                max_file_descriptors: 128,
                max_threads: 2,
            }),
            isolation_level: IsolationLevel::Process,
            auto_restart: true,
            restart_delay: 500,
            max_restarts: 10,
            health_check_interval: 15000,
            tags: vec!["cache".to_string(), "memory".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_server_creation() {
        let server = HttpWebServer::new(ServiceId(1), 8080, "127.0.0.1".to_string());
        assert_eq!(server.port, 8080);
        assert_eq!(server.bind_address, "127.0.0.1");
        assert!(!server.running);
    }

    #[test]
    fn test_database_service_creation() {
        let db = DatabaseService::new(ServiceId(2), "/tmp/database.db".to_string());
        assert_eq!(db.database_path, "/tmp/database.db");
        assert!(!db.running);
    }

    #[test]
    fn test_cache_service_creation() {
        let cache = CacheService::new(ServiceId(3), 1024 * 1024, 1000);
        assert_eq!(cache.cache_size, 1024 * 1024);
        assert_eq!(cache.max_items, 1000);
        assert!(!cache.running);
    }

    #[test]
    fn test_service_descriptors() {
        let http_desc = helpers::create_http_server_descriptor(8080);
        assert_eq!(http_desc.name, "http-server");
        assert_eq!(http_desc.service_type, ServiceType::UserService);

        let db_desc = helpers::create_database_descriptor("test.db".to_string());
        assert_eq!(db_desc.name, "database");
        assert_eq!(db_desc.service_type, ServiceType::SystemService);
    }
}