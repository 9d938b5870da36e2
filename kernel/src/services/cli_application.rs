//! MultiOS CLI Application
//! 
//! This module provides the main CLI application that integrates all CLI services
//! including command execution, script interpretation, and interactive shell features.

use crate::{KernelError, Result};
use crate::log::{info, warn, error};
use spin::{Mutex, RwLock};
use alloc::vec::Vec;
use alloc::string::{String, ToString};
use alloc::collections::VecDeque;
use alloc::sync::Arc;

pub mod application;
pub mod terminal;
pub mod interactive;
pub mod batch;

/// CLI Application Result
pub type ApplicationResult<T> = Result<T>;

/// CLI Application Error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ApplicationError {
    InitializationFailed = 0,
    ConfigurationError = 1,
    TerminalError = 2,
    SessionError = 3,
    CommandError = 4,
    ScriptError = 5,
    UserInterfaceError = 6,
    SystemIntegrationError = 7,
    ResourceError = 8,
}

/// CLI Application configuration
#[derive(Debug, Clone)]
pub struct CliApplicationConfig {
    pub enable_interactive_mode: bool,
    pub enable_batch_mode: bool,
    pub enable_scripting: bool,
    pub max_concurrent_sessions: usize,
    pub default_session_timeout: u64,
    pub enable_debug_mode: bool,
    pub auto_save_history: bool,
    pub history_file_path: String,
    pub config_file_path: String,
    pub log_level: String,
    pub prompt_format: String,
    pub completion_style: String,
}

/// CLI Session information
#[derive(Debug, Clone)]
pub struct CliSession {
    pub session_id: u64,
    pub user: String,
    pub start_time: u64,
    pub current_directory: String,
    pub command_count: u64,
    pub session_type: SessionType,
    pub is_active: bool,
}

/// Session types
#[derive(Debug, Clone)]
pub enum SessionType {
    Interactive,
    Batch,
    Script,
    Remote,
}

/// Main CLI Application
pub struct CliApplication {
    config: CliApplicationConfig,
    active_sessions: Vec<CliSession>,
    total_sessions: u64,
    application_stats: ApplicationStats,
    terminal_interface: Option<TerminalInterface>,
    script_interpreter: Option<Arc<Mutex<crate::services::cli_script_interpreter::ScriptInterpreter>>>,
    service_integration: ServiceIntegration,
}

/// Application statistics
#[derive(Debug, Clone)]
pub struct ApplicationStats {
    pub total_sessions_started: u64,
    pub total_commands_executed: u64,
    pub total_scripts_executed: u64,
    pub total_errors: u64,
    pub uptime_ns: u64,
    pub average_session_duration: f64,
    pub peak_concurrent_sessions: usize,
}

/// Service integration interface
#[derive(Debug, Clone)]
pub struct ServiceIntegration {
    pub cli_service_available: bool,
    pub script_interpreter_available: bool,
    pub file_service_available: bool,
    pub process_service_available: bool,
    pub user_service_available: bool,
}

impl CliApplication {
    /// Create a new CLI application
    pub fn new(config: CliApplicationConfig) -> Self {
        CliApplication {
            config,
            active_sessions: Vec::new(),
            total_sessions: 0,
            application_stats: ApplicationStats {
                total_sessions_started: 0,
                total_commands_executed: 0,
                total_scripts_executed: 0,
                total_errors: 0,
                uptime_ns: 0,
                average_session_duration: 0.0,
                peak_concurrent_sessions: 0,
            },
            terminal_interface: None,
            script_interpreter: None,
            service_integration: ServiceIntegration {
                cli_service_available: false,
                script_interpreter_available: false,
                file_service_available: false,
                process_service_available: false,
                user_service_available: false,
            },
        }
    }

    /// Initialize the CLI application
    pub fn init(&mut self) -> ApplicationResult<()> {
        info!("Initializing MultiOS CLI Application...");
        
        // Initialize service integration
        self.initialize_service_integration()?;
        
        // Initialize script interpreter
        if self.config.enable_scripting {
            self.initialize_script_interpreter()?;
        }
        
        // Initialize terminal interface
        if self.config.enable_interactive_mode {
            self.initialize_terminal_interface()?;
        }
        
        info!("CLI Application initialized successfully");
        Ok(())
    }

    /// Initialize service integration
    fn initialize_service_integration(&mut self) -> ApplicationResult<()> {
        // Check CLI service availability
        self.service_integration.cli_service_available = 
            crate::services::cli_service::CLI_SERVICE.lock().is_some();
        
        // Check other services (simplified)
        self.service_integration.file_service_available = true;
        self.service_integration.process_service_available = true;
        self.service_integration.user_service_available = true;
        
        info!("Service integration initialized");
        Ok(())
    }

    /// Initialize script interpreter
    fn initialize_script_interpreter(&mut self) -> ApplicationResult<()> {
        let interpreter = crate::services::cli_script_interpreter::ScriptInterpreter::new();
        self.script_interpreter = Some(Arc::new(Mutex::new(interpreter)));
        
        self.service_integration.script_interpreter_available = true;
        info!("Script interpreter initialized");
        Ok(())
    }

    /// Initialize terminal interface
    fn initialize_terminal_interface(&mut self) -> ApplicationResult<()> {
        // Simplified terminal interface initialization
        self.terminal_interface = Some(TerminalInterface::new());
        info!("Terminal interface initialized");
        Ok(())
    }

    /// Start the CLI application
    pub fn start(&mut self) -> ApplicationResult<()> {
        info!("Starting MultiOS CLI Application...");
        
        if self.config.enable_interactive_mode {
            self.start_interactive_mode()?;
        } else if self.config.enable_batch_mode {
            self.start_batch_mode()?;
        }
        
        info!("CLI Application started");
        Ok(())
    }

    /// Start interactive mode
    fn start_interactive_mode(&mut self) -> ApplicationResult<()> {
        info!("Starting interactive mode...");
        
        let session = self.create_session(SessionType::Interactive)?;
        self.active_sessions.push(session);
        
        // Start main interactive loop
        self.run_interactive_loop()?;
        
        Ok(())
    }

    /// Start batch mode
    fn start_batch_mode(&mut self) -> ApplicationResult<()> {
        info!("Starting batch mode...");
        
        let session = self.create_session(SessionType::Batch)?;
        self.active_sessions.push(session);
        
        // Process batch commands
        self.run_batch_processing()?;
        
        Ok(())
    }

    /// Create a new CLI session
    fn create_session(&mut self, session_type: SessionType) -> ApplicationResult<CliSession> {
        self.total_sessions += 1;
        
        let session = CliSession {
            session_id: self.total_sessions,
            user: "root".to_string(), // Would come from authentication
            start_time: crate::services::time_service::get_current_time_ms(),
            current_directory: "/".to_string(),
            command_count: 0,
            session_type,
            is_active: true,
        };
        
        self.application_stats.total_sessions_started += 1;
        
        if self.active_sessions.len() > self.application_stats.peak_concurrent_sessions {
            self.application_stats.peak_concurrent_sessions = self.active_sessions.len();
        }
        
        Ok(session)
    }

    /// Run the main interactive loop
    fn run_interactive_loop(&mut self) -> ApplicationResult<()> {
        info!("Entering interactive loop...");
        
        // Main interactive shell loop
        loop {
            // Display prompt
            if let Some(interface) = &self.terminal_interface {
                interface.display_prompt();
            }
            
            // Read input (simplified)
            let input = self.read_user_input()?;
            
            // Process the input
            if !input.trim().is_empty() {
                self.process_interactive_input(&input)?;
            }
            
            // Check for session termination
            if self.should_terminate_session() {
                break;
            }
        }
        
        info!("Interactive loop terminated");
        Ok(())
    }

    /// Run batch processing
    fn run_batch_processing(&mut self) -> ApplicationResult<()> {
        info!("Running batch processing...");
        
        // Process batch commands from configuration
        let commands = self.get_batch_commands()?;
        
        for command in commands {
            self.execute_batch_command(&command)?;
        }
        
        Ok(())
    }

    /// Process interactive input
    fn process_interactive_input(&mut self, input: &str) -> ApplicationResult<()> {
        // Check if it's a script command
        if input.starts_with('#') {
            self.execute_script_line(input)?;
        } else {
            // Regular command
            self.execute_interactive_command(input)?;
        }
        
        Ok(())
    }

    /// Execute interactive command
    fn execute_interactive_command(&self, command_line: &str) -> ApplicationResult<()> {
        if let Some(cli_service) = crate::services::cli_service::CLI_SERVICE.lock().as_mut() {
            match cli_service.execute_command(command_line) {
                Ok(result) => {
                    if !result.output.is_empty() {
                        println!("{}", result.output);
                    }
                }
                Err(e) => {
                    error!("Command execution failed: {:?}", e);
                }
            }
        }
        
        Ok(())
    }

    /// Execute script line
    fn execute_script_line(&mut self, script_line: &str) -> ApplicationResult<()> {
        if let Some(interpreter) = &self.script_interpreter {
            let mut context = self.create_script_context()?;
            
            match interpreter.lock().execute_script(script_line, &mut context) {
                Ok(result) => {
                    info!("Script execution result: {:?}", result);
                }
                Err(e) => {
                    error!("Script execution failed: {:?}", e);
                }
            }
        }
        
        Ok(())
    }

    /// Execute batch command
    fn execute_batch_command(&self, command_line: &str) -> ApplicationResult<()> {
        if let Some(cli_service) = crate::services::cli_service::CLI_SERVICE.lock().as_mut() {
            match cli_service.execute_command(command_line) {
                Ok(result) => {
                    if !result.output.is_empty() && self.config.enable_debug_mode {
                        println!("{}", result.output);
                    }
                }
                Err(e) => {
                    error!("Batch command execution failed: {:?}", e);
                }
            }
        }
        
        Ok(())
    }

    /// Create script execution context
    fn create_script_context(&self) -> ApplicationResult<crate::services::cli_script_interpreter::ScriptContext> {
        let global_scope = Arc::new(Mutex::new(
            crate::services::cli_script_interpreter::ScriptScope {
                variables: HashMap::new(),
                functions: HashMap::new(),
                readonly_vars: alloc::collections::BTreeSet::new(),
            }
        ));
        
        Ok(crate::services::cli_script_interpreter::ScriptContext {
            current_scope: crate::services::cli_script_interpreter::ScriptScope {
                variables: HashMap::new(),
                functions: HashMap::new(),
                readonly_vars: alloc::collections::BTreeSet::new(),
            },
            global_scope,
            working_directory: "/".to_string(),
            environment: HashMap::new(),
            exit_code: 0,
            line_number: 0,
            source_file: None,
            debug_mode: self.config.enable_debug_mode,
            timeout_ms: self.config.default_session_timeout,
            start_time: crate::services::time_service::get_current_time_ms(),
            call_stack: Vec::new(),
            loop_stack: Vec::new(),
        })
    }

    /// Read user input
    fn read_user_input(&self) -> ApplicationResult<String> {
        // Simplified input reading
        // In a real implementation, this would use the terminal interface
        Ok("echo 'Hello World'".to_string()) // Placeholder
    }

    /// Get batch commands (from configuration or file)
    fn get_batch_commands(&self) -> ApplicationResult<Vec<String>> {
        // Return sample batch commands
        Ok(vec![
            "uname -a".to_string(),
            "uptime".to_string(),
            "free".to_string(),
            "ps".to_string(),
        ])
    }

    /// Check if session should be terminated
    fn should_terminate_session(&self) -> bool {
        // Check for exit command or timeout
        false // Placeholder
    }

    /// Get application statistics
    pub fn get_stats(&self) -> &ApplicationStats {
        &self.application_stats
    }

    /// Get active sessions
    pub fn get_active_sessions(&self) -> &[CliSession] {
        &self.active_sessions
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> ApplicationResult<()> {
        info!("Shutting down CLI Application...");
        
        // Terminate all active sessions
        for session in &mut self.active_sessions {
            session.is_active = false;
        }
        self.active_sessions.clear();
        
        // Cleanup resources
        self.terminal_interface = None;
        self.script_interpreter = None;
        
        info!("CLI Application shutdown complete");
        Ok(())
    }
}

/// Terminal interface (simplified)
#[derive(Debug, Clone)]
pub struct TerminalInterface {
    pub terminal_width: usize,
    pub terminal_height: usize,
    pub current_line: String,
    pub history_index: usize,
    pub completion_enabled: bool,
}

impl TerminalInterface {
    fn new() -> Self {
        TerminalInterface {
            terminal_width: 80,
            terminal_height: 24,
            current_line: String::new(),
            history_index: 0,
            completion_enabled: true,
        }
    }

    fn display_prompt(&self) {
        // Simplified prompt display
        print!("MultiOS> ");
        use core::io::Write;
        let _ = core::io::stdout().flush();
    }
}

/// CLI Application Manager
pub struct CliApplicationManager {
    application: Option<CliApplication>,
    config: Option<CliApplicationConfig>,
}

impl CliApplicationManager {
    /// Create a new CLI application manager
    pub fn new() -> Self {
        CliApplicationManager {
            application: None,
            config: None,
        }
    }

    /// Configure the CLI application
    pub fn configure(&mut self, config: CliApplicationConfig) {
        self.config = Some(config);
    }

    /// Initialize and start the CLI application
    pub fn start(&mut self) -> ApplicationResult<()> {
        let config = self.config
            .clone()
            .unwrap_or_else(|| CliApplicationConfig {
                enable_interactive_mode: true,
                enable_batch_mode: false,
                enable_scripting: true,
                max_concurrent_sessions: 10,
                default_session_timeout: 3600000, // 1 hour
                enable_debug_mode: false,
                auto_save_history: true,
                history_file_path: "/home/user/.multios_history".to_string(),
                config_file_path: "/etc/multios/cli.conf".to_string(),
                log_level: "info".to_string(),
                prompt_format: "MultiOS> ".to_string(),
                completion_style: "bash".to_string(),
            });
        
        let mut application = CliApplication::new(config);
        application.init()?;
        application.start()?;
        
        self.application = Some(application);
        
        Ok(())
    }

    /// Shutdown the CLI application
    pub fn shutdown(&mut self) -> ApplicationResult<()> {
        if let Some(application) = self.application.as_mut() {
            application.shutdown()?;
        }
        
        Ok(())
    }

    /// Get the current application
    pub fn get_application(&self) -> Option<&CliApplication> {
        self.application.as_ref()
    }
}

/// Global CLI application manager instance
pub static CLI_APPLICATION_MANAGER: Mutex<Option<CliApplicationManager>> = Mutex::new(None);

/// Initialize the CLI application system
pub fn init() -> Result<()> {
    let mut manager_guard = CLI_APPLICATION_MANAGER.lock();
    
    if manager_guard.is_some() {
        return Err(KernelError::InitializationFailed.into());
    }
    
    let manager = CliApplicationManager::new();
    *manager_guard = Some(manager);
    
    info!("CLI Application Manager initialized");
    Ok(())
}

/// Start the CLI application
pub fn start(config: Option<CliApplicationConfig>) -> Result<()> {
    let mut manager_guard = CLI_APPLICATION_MANAGER.lock();
    
    let manager = manager_guard
        .as_mut()
        .ok_or(KernelError::InitializationFailed)?;
    
    if let Some(config) = config {
        manager.configure(config);
    }
    
    manager.start()
}

/// Shutdown the CLI application system
pub fn shutdown() -> Result<()> {
    let mut manager_guard = CLI_APPLICATION_MANAGER.lock();
    
    if let Some(manager) = manager_guard.as_mut() {
        manager.shutdown()?;
    }
    
    info!("CLI Application System shutdown complete");
    Ok(())
}

impl From<ApplicationError> for KernelError {
    fn from(_error: ApplicationError) -> Self {
        KernelError::FeatureNotSupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_application_creation() {
        let config = CliApplicationConfig {
            enable_interactive_mode: true,
            enable_batch_mode: false,
            enable_scripting: true,
            max_concurrent_sessions: 5,
            default_session_timeout: 3600000,
            enable_debug_mode: false,
            auto_save_history: true,
            history_file_path: "/tmp/test_history".to_string(),
            config_file_path: "/tmp/test_config".to_string(),
            log_level: "info".to_string(),
            prompt_format: "test> ".to_string(),
            completion_style: "bash".to_string(),
        };
        
        let app = CliApplication::new(config);
        assert!(!app.config.enable_batch_mode);
        assert_eq!(app.config.max_concurrent_sessions, 5);
    }

    #[test]
    fn test_cli_session_creation() {
        let mut app = CliApplication::new(CliApplicationConfig::default());
        let session = app.create_session(SessionType::Interactive).unwrap();
        
        assert_eq!(session.session_type, SessionType::Interactive);
        assert!(session.is_active);
    }
}