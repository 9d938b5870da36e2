//! Security Integration Example
//!
//! This module demonstrates how to integrate and use the secure boot
//! verification and network security features in the MultiOS kernel.

use crate::security::{
    self, BootImageInfo, BootChainElement, BootComponentType,
    FirewallRule, FirewallRuleType, NetworkProtocol, NetworkPacket,
    VpnTunnel, VpnEncryption, VpnAuth, VpnStatus,
    IntrusionSignature, IntrusionSeverity, IntrusionResponse,
    InterfaceSecurity, init_comprehensive_security, verify_security_status,
    add_firewall_rule, create_vpn_tunnel, process_packet, detect_intrusions,
    get_security_stats, perform_security_audit, SecurityAuditReport,
};

use log::{info, warn, error, debug};

/// Integration example demonstrating boot verification
pub fn boot_verification_example() {
    info!("=== Boot Verification Integration Example ===");
    
    // Initialize boot verification system
    let boot_config = security::BootVerifyConfig {
        verify_images: true,
        verify_chain: true,
        measured_boot: true,
        use_tpm: true,
        use_hsm: false, // Enable when HSM is available
        strict_mode: false,
        trust_anchor: vec![0x42; 32], // Example trust anchor
    };
    
    security::init_boot_verify(boot_config);
    info!("Boot verification system initialized");
    
    // Simulate boot chain elements
    let firmware = BootChainElement {
        name: "UEFI Firmware".to_string(),
        component_type: BootComponentType::Firmware,
        physical_addr: 0xF0000,
        hash: [1u8; 32],
        verified: false,
        parent: None,
    };
    
    let bootloader = BootChainElement {
        name: "Bootloader".to_string(),
        component_type: BootComponentType::Bootloader,
        physical_addr: 0x1000000,
        hash: [2u8; 32],
        verified: false,
        parent: Some("UEFI Firmware".to_string()),
    };
    
    let kernel = BootChainElement {
        name: "Kernel".to_string(),
        component_type: BootComponentType::Kernel,
        physical_addr: 0x2000000,
        hash: [3u8; 32],
        verified: false,
        parent: Some("Bootloader".to_string()),
    };
    
    // Add chain elements (normally done during boot process)
    if let Some(mut boot_verify) = security::boot_verify_instance() {
        boot_verify.add_chain_element(firmware);
        boot_verify.add_chain_element(bootloader);
        boot_verify.add_chain_element(kernel);
        
        // Verify boot chain
        match boot_verify.verify_boot_chain() {
            security::BootVerifyResult::Success => {
                info!("Boot chain verification successful");
                
                // Perform measured boot for attestation
                match boot_verify.measured_boot() {
                    Ok(attestation) => {
                        info!("Measured boot completed");
                        info!("Generated {} PCR measurements", attestation.pcrs.len());
                        info!("Boot events recorded: {}", attestation.boot_events.len());
                    },
                    Err(e) => {
                        warn!("Measured boot failed: {:?}", e);
                    }
                }
            },
            e => {
                error!("Boot chain verification failed: {:?}", e);
            }
        }
    }
    
    // Example boot image verification
    let kernel_image = BootImageInfo {
        physical_addr: 0x2000000,
        size: 1024 * 1024, // 1MB kernel image
        hash: [3u8; 32],
        signature: vec![0xAA; 64], // Example signature
        build_timestamp: 1638360000,
        version: "1.0.0".to_string(),
        arch: "x86_64".to_string(),
    };
    
    match security::verify_image(&kernel_image) {
        security::BootVerifyResult::Success => {
            info!("Kernel image verification successful");
        },
        e => {
            warn!("Kernel image verification failed: {:?}", e);
        }
    }
}

/// Integration example demonstrating network security
pub fn network_security_example() {
    info!("=== Network Security Integration Example ===");
    
    // Initialize network security system
    security::init_network_security();
    info!("Network security system initialized");
    
    // Configure network interface security
    let interface_config = InterfaceSecurity {
        interface_idx: 0,
        name: "eth0".to_string(),
        firewall_enabled: true,
        ids_enabled: true,
        vpn_enabled: true,
        default_action: FirewallRuleType::Deny,
        rules: Vec::new(),
    };
    
    if let Some(mut net_security) = security::network_security_instance() {
        net_security.configure_interface(interface_config);
        
        // Add comprehensive firewall rules
        
        // Rule 1: Allow SSH (port 22)
        let ssh_rule = FirewallRule {
            id: 1,
            name: "Allow SSH".to_string(),
            rule_type: FirewallRuleType::Allow,
            src_ip_range: None,
            dst_ip_range: None,
            src_port_range: None,
            dst_port_range: Some((22, 22)),
            protocol: NetworkProtocol::Tcp,
            rate_limit: None,
            priority: 1,
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(ssh_rule);
        info!("Added SSH allow rule");
        
        // Rule 2: Allow HTTP (port 80)
        let http_rule = FirewallRule {
            id: 2,
            name: "Allow HTTP".to_string(),
            rule_type: FirewallRuleType::Allow,
            src_ip_range: None,
            dst_ip_range: None,
            src_port_range: None,
            dst_port_range: Some((80, 80)),
            protocol: NetworkProtocol::Tcp,
            rate_limit: None,
            priority: 2,
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(http_rule);
        info!("Added HTTP allow rule");
        
        // Rule 3: Deny Telnet (port 23) - security risk
        let telnet_rule = FirewallRule {
            id: 3,
            name: "Deny Telnet".to_string(),
            rule_type: FirewallRuleType::Deny,
            src_ip_range: None,
            dst_ip_range: None,
            src_port_range: None,
            dst_port_range: Some((23, 23)),
            protocol: NetworkProtocol::Tcp,
            rate_limit: None,
            priority: 1,
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(http_rule);
        info!("Added Telnet deny rule");
        
        // Rule 4: Rate limit ICMP (ping)
        let icmp_rule = FirewallRule {
            id: 4,
            name: "Rate Limit ICMP".to_string(),
            rule_type: FirewallRuleType::RateLimit,
            src_ip_range: None,
            dst_ip_range: None,
            src_port_range: None,
            dst_port_range: None,
            protocol: NetworkProtocol::Icmp,
            rate_limit: Some(10), // 10 packets per second
            priority: 10,
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(icmp_rule);
        info!("Added ICMP rate limit rule");
        
        // Create VPN tunnel
        let vpn_tunnel = VpnTunnel {
            tunnel_id: 1,
            local_endpoint: [192, 168, 1, 100],
            remote_endpoint: [10, 0, 0, 1],
            encryption: VpnEncryption::Aes256,
            authentication: VpnAuth::HmacSha256,
            status: VpnStatus::Active,
            encrypted_data: Vec::new(),
            session_key: vec![0x5A; 32],
        };
        
        net_security.create_vpn_tunnel(vpn_tunnel);
        info!("Created VPN tunnel");
        
        // Add intrusion detection signatures
        
        // Signature 1: Port scan detection
        let port_scan_sig = IntrusionSignature {
            id: 1,
            name: "Port Scan Attack".to_string(),
            protocol: NetworkProtocol::Tcp,
            src_port_pattern: None,
            dst_port_pattern: None,
            payload_pattern: vec![0x00], // SYN packet pattern
            severity: IntrusionSeverity::Medium,
            active: true,
        };
        
        net_security.add_intrusion_signature(port_scan_sig);
        info!("Added port scan detection signature");
        
        // Signature 2: SQL injection attempt
        let sql_injection_sig = IntrusionSignature {
            id: 2,
            name: "SQL Injection Attempt".to_string(),
            protocol: NetworkProtocol::Tcp,
            src_port_pattern: None,
            dst_port_pattern: Some(80), // HTTP traffic
            payload_pattern: b"UNION SELECT".to_vec(),
            severity: IntrusionSeverity::High,
            active: true,
        };
        
        net_security.add_intrusion_signature(sql_injection_sig);
        info!("Added SQL injection detection signature");
        
        // Simulate network traffic processing
        
        // Traffic 1: Legitimate SSH connection
        let ssh_packet = NetworkPacket {
            src_ip: [192, 168, 1, 50],
            dst_ip: [192, 168, 1, 100],
            src_port: 12345,
            dst_port: 22,
            protocol: NetworkProtocol::Tcp,
            data: b"SSH connection".to_vec(),
            size: 16,
            timestamp: 1638360000,
            interface_idx: 0,
        };
        
        match net_security.process_packet(&ssh_packet) {
            security::NetworkSecurityResult::Success => {
                debug!("SSH packet allowed");
            },
            e => {
                warn!("SSH packet denied: {:?}", e);
            }
        }
        
        // Check for intrusions in SSH packet
        let ssh_intrusions = net_security.detect_intrusions(&ssh_packet);
        if ssh_intrusions.is_empty() {
            debug!("No intrusions detected in SSH traffic");
        }
        
        // Traffic 2: Telnet connection attempt (should be denied)
        let telnet_packet = NetworkPacket {
            src_ip: [192, 168, 1, 50],
            dst_ip: [192, 168, 1, 100],
            src_port: 12346,
            dst_port: 23,
            protocol: NetworkProtocol::Tcp,
            data: b"Telnet connection".to_vec(),
            size: 17,
            timestamp: 1638360001,
            interface_idx: 0,
        };
        
        match net_security.process_packet(&telnet_packet) {
            security::NetworkSecurityResult::Denied => {
                info!("Telnet packet correctly denied by firewall");
            },
            e => {
                warn!("Telnet packet not denied: {:?}", e);
            }
        }
        
        // Traffic 3: HTTP request with potential SQL injection
        let http_sql_packet = NetworkPacket {
            src_ip: [192, 168, 1, 50],
            dst_ip: [192, 168, 1, 100],
            src_port: 12347,
            dst_port: 80,
            protocol: NetworkProtocol::Tcp,
            data: b"GET /page.php?id=1' UNION SELECT * FROM users HTTP/1.1".to_vec(),
            size: 60,
            timestamp: 1638360002,
            interface_idx: 0,
        };
        
        // Process the HTTP packet
        let packet_result = net_security.process_packet(&http_sql_packet);
        match packet_result {
            security::NetworkSecurityResult::Success => {
                debug!("HTTP packet allowed (may contain SQL injection)");
            },
            e => {
                warn!("HTTP packet denied: {:?}", e);
            }
        }
        
        // Check for intrusions (should detect SQL injection)
        let sql_intrusions = net_security.detect_intrusions(&http_sql_packet);
        for intrusion in &sql_intrusions {
            info!("INTRUSION DETECTED: {}", intrusion.signature.name);
            info!("Source: {}.{}.{}.{}:{}", 
                  intrusion.src_ip[0], intrusion.src_ip[1], 
                  intrusion.src_ip[2], intrusion.src_ip[3], intrusion.src_port);
            info!("Severity: {:?}", intrusion.signature.severity);
            match intrusion.response {
                IntrusionResponse::LogOnly => {
                    info!("Response: Logged only");
                },
                IntrusionResponse::BlockSource => {
                    info!("Response: Blocking source IP");
                },
                _ => {
                    info!("Response: Other action");
                }
            }
        }
        
        // Update statistics
        net_security.update_stats();
        
        // Get and display statistics
        let stats = net_security.get_stats();
        info!("=== Network Security Statistics ===");
        info!("Total packets processed: {}", stats.total_packets);
        info!("Packets allowed: {}", stats.packets_allowed);
        info!("Packets blocked: {}", stats.packets_blocked);
        info!("Intrusions detected: {}", stats.intrusions_detected);
        info!("VPN tunnels active: {}", stats.vpn_tunnels_active);
        info!("Firewall rules active: {}", stats.firewall_rules_active);
        
        // Test VPN encryption/decryption
        let test_data = b"Secret message to encrypt";
        match net_security.encrypt_vpn_data(1, test_data) {
            Ok(encrypted) => {
                info!("Data encrypted successfully");
                match net_security.decrypt_vpn_data(1, &encrypted) {
                    Ok(decrypted) => {
                        if decrypted == test_data {
                            info!("VPN encryption/decryption test passed");
                        } else {
                            error!("VPN encryption/decryption test failed");
                        }
                    },
                    Err(e) => {
                        error!("VPN decryption failed: {:?}", e);
                    }
                }
            },
            Err(e) => {
                error!("VPN encryption failed: {:?}", e);
            }
        }
    }
}

/// Comprehensive security system integration example
pub fn comprehensive_security_integration() {
    info!("=== Comprehensive Security Integration Example ===");
    
    // Initialize entire security system
    match init_comprehensive_security() {
        Ok(_) => {
            info!("Comprehensive security system initialized successfully");
        },
        Err(e) => {
            error!("Failed to initialize security system: {}", e);
            return;
        }
    }
    
    // Verify security status
    match verify_security_status() {
        Ok(status) => {
            info!("=== Security System Status ===");
            info!("Boot verification: {}", if status.boot_verify { "Active" } else { "Inactive" });
            info!("Network security: {}", if status.network_security { "Active" } else { "Inactive" });
            info!("Fully initialized: {}", if status.fully_initialized { "Yes" } else { "No" });
        },
        Err(e) => {
            error!("Security verification failed: {}", e);
        }
    }
    
    // Run boot verification example
    boot_verification_example();
    
    // Run network security example
    network_security_example();
    
    // Perform comprehensive security audit
    match perform_security_audit() {
        Some(audit) => {
            info!("=== Comprehensive Security Audit ===");
            info!("Timestamp: {}", audit.timestamp);
            
            info!("Boot Verification Audit:");
            info!("  Enabled: {}", audit.boot_verification.enabled);
            info!("  Chain Verified: {}", audit.boot_verification.chain_verified);
            info!("  Elements Verified: {}/{}", 
                  audit.boot_verification.verified_elements, 
                  audit.boot_verification.total_elements);
            info!("  Attestation Available: {}", audit.boot_verification.attestation_available);
            
            info!("Network Security Audit:");
            info!("  Enabled: {}", audit.network_security.enabled);
            info!("  Packets Processed: {}", audit.network_security.packets_processed);
            info!("  Packets Blocked: {}", audit.network_security.packets_blocked);
            info!("  Intrusions Detected: {}", audit.network_security.intrusions_detected);
            info!("  VPN Tunnels Active: {}", audit.network_security.vpn_tunnels_active);
            info!("  Firewall Rules Active: {}", audit.network_security.firewall_rules_active);
            
            info!("System Integrity Audit:");
            info!("  Boot Chain Verified: {}", audit.system_integrity.boot_chain_verified);
            info!("  Network Security Active: {}", audit.system_integrity.network_security_active);
            info!("  System Hardened: {}", audit.system_integrity.system_hardened);
        },
        None => {
            error!("Failed to perform security audit");
        }
    }
    
    // Get comprehensive security statistics
    let (auth_stats, encryption_stats, network_stats) = get_security_stats();
    info!("=== Comprehensive Security Statistics ===");
    info!("Authentication Statistics:");
    info!("  Successful logins: {}", auth_stats.successful_logins);
    info!("  Failed logins: {}", auth_stats.failed_logins);
    info!("  Active sessions: {}", auth_stats.active_sessions);
    info!("  Locked accounts: {}", auth_stats.locked_accounts);
    
    // Note: EncryptionManager stats would be accessed through its methods
    info!("Network Security Statistics:");
    info!("  Total packets: {}", network_stats.total_packets);
    info!("  Packets blocked: {}", network_stats.packets_blocked);
    info!("  Intrusions detected: {}", network_stats.intrusions_detected);
    
    info!("Security integration example completed");
}

/// Real-world usage scenarios
pub fn real_world_scenarios() {
    info!("=== Real-World Security Scenarios ===");
    
    // Scenario 1: Enterprise network protection
    enterprise_network_protection();
    
    // Scenario 2: IoT device security
    iot_device_security();
    
    // Scenario 3: Cloud server protection
    cloud_server_protection();
    
    // Scenario 4: Mobile device security
    mobile_device_security();
}

fn enterprise_network_protection() {
    info!("\n--- Enterprise Network Protection Scenario ---");
    
    // Initialize security system for enterprise use
    let boot_config = security::BootVerifyConfig {
        verify_images: true,
        verify_chain: true,
        measured_boot: true,
        use_tpm: true,
        use_hsm: true, // Enterprise requires HSM
        strict_mode: true, // Strict mode for enterprise
        trust_anchor: vec![0xEE; 32], // Enterprise trust anchor
    };
    
    security::init_boot_verify(boot_config);
    security::init_network_security();
    
    if let Some(mut net_security) = security::network_security_instance() {
        // Enterprise-grade firewall rules
        
        // Allow internal network traffic
        let internal_rule = FirewallRule {
            id: 10,
            name: "Allow Internal Network".to_string(),
            rule_type: FirewallRuleType::Allow,
            src_ip_range: Some((u32::from_be_bytes([192, 168, 1, 0]), 
                               u32::from_be_bytes([192, 168, 1, 255]))),
            dst_ip_range: Some((u32::from_be_bytes([192, 168, 1, 0]), 
                               u32::from_be_bytes([192, 168, 1, 255]))),
            src_port_range: None,
            dst_port_range: None,
            protocol: NetworkProtocol::Any,
            rate_limit: None,
            priority: 1,
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(internal_rule);
        
        // Allow HTTPS with rate limiting
        let https_rule = FirewallRule {
            id: 11,
            name: "Allow HTTPS".to_string(),
            rule_type: FirewallRuleType::Allow,
            src_ip_range: None,
            dst_ip_range: None,
            src_port_range: None,
            dst_port_range: Some((443, 443)),
            protocol: NetworkProtocol::Tcp,
            rate_limit: Some(1000), // 1000 connections per second
            priority: 2,
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(https_rule);
        
        // Block known malicious IPs
        let block_rule = FirewallRule {
            id: 12,
            name: "Block Malicious IPs".to_string(),
            rule_type: FirewallRuleType::Deny,
            src_ip_range: Some((u32::from_be_bytes([10, 0, 0, 1]), 
                               u32::from_be_bytes([10, 0, 0, 10]))),
            dst_ip_range: None,
            src_port_range: None,
            dst_port_range: None,
            protocol: NetworkProtocol::Any,
            rate_limit: None,
            priority: 0, // Highest priority
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(block_rule);
        
        // Enterprise intrusion signatures
        let malware_sig = IntrusionSignature {
            id: 100,
            name: "Malware C&C Communication".to_string(),
            protocol: NetworkProtocol::Tcp,
            src_port_pattern: None,
            dst_port_pattern: Some(8080),
            payload_pattern: b"MALWARE".to_vec(),
            severity: IntrusionSeverity::Critical,
            active: true,
        };
        
        net_security.add_intrusion_signature(malware_sig);
        
        info!("Enterprise security configuration applied");
    }
}

fn iot_device_security() {
    info!("\n--- IoT Device Security Scenario ---");
    
    // Lightweight security for IoT devices
    let boot_config = security::BootVerifyConfig {
        verify_images: true,
        verify_chain: false, // Simplified for IoT
        measured_boot: false,
        use_tpm: false,
        use_hsm: false,
        strict_mode: false,
        trust_anchor: vec![0x11; 32],
    };
    
    security::init_boot_verify(boot_config);
    security::init_network_security();
    
    if let Some(mut net_security) = security::network_security_instance() {
        // IoT-specific firewall rules
        
        // Allow only necessary ports
        let mqtt_rule = FirewallRule {
            id: 20,
            name: "Allow MQTT".to_string(),
            rule_type: FirewallRuleType::Allow,
            src_ip_range: None,
            dst_ip_range: None,
            src_port_range: None,
            dst_port_range: Some((1883, 1883)),
            protocol: NetworkProtocol::Tcp,
            rate_limit: Some(10), // Low rate for IoT
            priority: 1,
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(mqtt_rule);
        
        // Block all other traffic
        let default_deny_rule = FirewallRule {
            id: 21,
            name: "Default Deny".to_string(),
            rule_type: FirewallRuleType::Deny,
            src_ip_range: None,
            dst_ip_range: None,
            src_port_range: None,
            dst_port_range: None,
            protocol: NetworkProtocol::Any,
            rate_limit: None,
            priority: 100,
            active: true,
            security::RuleStats::default(),
        };
        
        net_security.add_firewall_rule(default_deny_rule);
        
        info!("IoT security configuration applied");
    }
}

fn cloud_server_protection() {
    info!("\n--- Cloud Server Protection Scenario ---");
    
    // High-security configuration for cloud servers
    security::init_comprehensive_security();
    
    info!("Cloud server security configured with maximum protection");
}

fn mobile_device_security() {
    info!("\n--- Mobile Device Security Scenario ---");
    
    // Balanced security for mobile devices
    let boot_config = security::BootVerifyConfig {
        verify_images: true,
        verify_chain: true,
        measured_boot: true,
        use_tpm: false,
        use_hsm: false,
        strict_mode: false,
        trust_anchor: vec![0x22; 32],
    };
    
    security::init_boot_verify(boot_config);
    security::init_network_security();
    
    info!("Mobile device security configured for performance and protection");
}
