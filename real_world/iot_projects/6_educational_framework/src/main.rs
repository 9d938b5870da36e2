//! Educational IoT Tutorial Framework
//! 
//! Comprehensive educational framework for learning IoT development with RISC-V.
//! Includes hands-on tutorials, interactive examples, progressive learning modules,
//! and assessment tools for students and developers.
//!
//! Features:
//! - Progressive learning modules from beginner to advanced
//! - Interactive sensor tutorials
//! - Communication protocol workshops
//! - Real-world project templates
//! - Code examples and exercises
//! - Assessment and testing framework

#![no_std]
#![main]

use core::fmt::Write;
use heapless::{String, Vec, FnvIndexMap};

use riscv_hal::*;
use iot_communication::*;

// Learning modules
#[derive(Clone, Copy, Debug)]
struct LearningModule {
    module_id: u8,
    title: String<64>,
    description: String<256>,
    difficulty: DifficultyLevel,
    estimated_time: u16, // minutes
    prerequisites: Vec<u8, 4>, // Module IDs that must be completed
    exercises: Vec<Exercise, 16>,
    examples: Vec<CodeExample, 8>,
    quiz_questions: Vec<QuizQuestion, 16],
    hands_on_projects: Vec<ProjectTemplate, 8>,
    completed: bool,
    progress_percentage: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DifficultyLevel {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

// Interactive exercises
#[derive(Clone, Copy, Debug)]
struct Exercise {
    exercise_id: String<16>,
    title: String<64>,
    description: String<256>,
    code_template: String<512>,
    expected_output: String<128],
    hints: Vec<String<64>, 4>,
    solution_available: bool,
    time_limit_minutes: u8,
    points: u8,
}

// Code examples
#[derive(Clone, Copy, Debug)]
struct CodeExample {
    example_id: String<16>,
    title: String<64>,
    description: String<256>,
    code: String<1024],
    explanation: String<512],
    complexity: CodeComplexity,
    category: CodeCategory,
}

#[derive(Clone, Copy, Debug)]
enum CodeComplexity {
    Simple = 1,
    Medium = 2,
    Complex = 3,
}

#[derive(Clone, Copy, Debug)]
enum CodeCategory {
    HelloWorld = 1,
    SensorReading = 2,
    DataProcessing = 3,
    Communication = 4,
    UserInterface = 5,
    PowerManagement = 6,
    RealTime = 7,
    Networking = 8,
}

// Quiz questions
#[derive(Clone, Copy, Debug)]
struct QuizQuestion {
    question_id: String<16>,
    question: String<256>,
    question_type: QuestionType,
    options: Vec<String<128>, 4>,
    correct_answer: u8,
    explanation: String<256],
    difficulty: DifficultyLevel,
    points: u8,
}

#[derive(Clone, Copy, Debug)]
enum QuestionType {
    MultipleChoice = 1,
    TrueFalse = 2,
    FillInBlank = 3,
    CodeCompletion = 4,
}

// Project templates
#[derive(Clone, Copy, Debug)]
struct ProjectTemplate {
    project_id: String<16>,
    title: String<64>,
    description: String<256],
    difficulty: DifficultyLevel,
    estimated_hours: u8,
    required_hardware: Vec<String<32>, 8>,
    learning_objectives: Vec<String<128>, 8>,
    implementation_steps: Vec<ImplementationStep, 16>,
    resources: Vec<String<128>, 8],
    assessment_criteria: Vec<String<128>, 8],
}

#[derive(Clone, Copy, Debug)]
struct ImplementationStep {
    step_number: u8,
    title: String<64>,
    description: String<256],
    code_snippets: Vec<String<512>, 4],
    expected_result: String<128],
    verification_method: String<128],
}

// Student progress tracking
#[derive(Clone, Copy, Debug)]
struct StudentProgress {
    student_id: String<16>,
    enrolled_modules: Vec<u8, 32], // Module IDs
    completed_modules: Vec<u8, 32>,
    current_module: u8,
    total_score: u16,
    achievements: Vec<Achievement, 16>,
    time_spent_minutes: u32,
    last_activity: u32,
}

#[derive(Clone, Copy, Debug)]
struct Achievement {
    achievement_id: String<16>,
    title: String<64>,
    description: String<128],
    points: u8,
    earned_at: u32,
}

// Assessment framework
#[derive(Clone, Copy, Debug)]
struct Assessment {
    assessment_id: String<16>,
    title: String<64>,
    description: String<256],
    module_id: u8,
    question_count: u8,
    time_limit_minutes: u16,
    passing_score: u8,
    attempts_allowed: u8,
    questions: Vec<QuizQuestion, 32],
}

// Main educational framework
struct EducationalFramework {
    modules: FnvIndexMap<u8, LearningModule, 16>,
    code_examples: Vec<CodeExample, 32>,
    project_templates: Vec<ProjectTemplate, 16>,
    assessments: FnvIndexMap<u8, Assessment, 8>,
    student_progress: FnvIndexMap<String<16>, StudentProgress, 32>,
    communication_manager: CommunicationManager,
    code_runner: CodeRunner,
    virtual_lab: VirtualLab,
}

struct CodeRunner {
    supported_languages: Vec<String<16>, 8>,
    execution_timeout_ms: u32,
    sandbox_enabled: bool,
}

struct VirtualLab {
    virtual_devices: FnvIndexMap<String<24>, VirtualDevice, 16>,
    simulation_running: bool,
}

#[derive(Clone, Copy, Debug)]
struct VirtualDevice {
    device_id: String<24>,
    device_type: String<32>,
    simulated_sensors: FnvIndexMap<String<16>, VirtualSensor, 8>,
    capabilities: Vec<String<32>, 8],
}

#[derive(Clone, Copy, Debug)]
struct VirtualSensor {
    sensor_id: String<16>,
    sensor_type: String<32>,
    current_value: f32,
    range_min: f32,
    range_max: f32,
    update_frequency_hz: u8,
}

impl EducationalFramework {
    pub fn new() -> Self {
        Self {
            modules: FnvIndexMap::new(),
            code_examples: Vec::new(),
            project_templates: Vec::new(),
            assessments: FnvIndexMap::new(),
            student_progress: FnvIndexMap::new(),
            communication_manager: CommunicationManager::new(),
            code_runner: CodeRunner {
                supported_languages: vec![
                    String::from("rust"),
                    String::from("c"),
                    String::from("assembly"),
                ],
                execution_timeout_ms: 10000,
                sandbox_enabled: true,
            },
            virtual_lab: VirtualLab {
                virtual_devices: FnvIndexMap::new(),
                simulation_running: false,
            },
        }
    }

    pub fn init(&mut self) -> Result<(), EducationalFrameworkError> {
        // Initialize learning modules
        self.create_learning_modules()?;
        
        // Initialize code examples
        self.create_code_examples()?;
        
        // Initialize project templates
        self.create_project_templates()?;
        
        // Initialize virtual lab
        self.create_virtual_lab()?;
        
        // Initialize communication for cloud-based learning
        self.init_learning_platform()?;
        
        println!("🎓 Educational IoT Framework Initialized");
        println!("📚 Learning Modules: {}", self.modules.len());
        println!("💻 Code Examples: {}", self.code_examples.len());
        println!("🔬 Project Templates: {}", self.project_templates.len());
        println!("🖥️  Virtual Devices: {}", self.virtual_lab.virtual_devices.len());
        
        Ok(())
    }

    fn create_learning_modules(&mut self) -> Result<(), EducationalFrameworkError> {
        // Module 1: IoT Fundamentals
        let mut module1 = LearningModule {
            module_id: 1,
            title: String::from("IoT Fundamentals with RISC-V"),
            description: String::from("Introduction to Internet of Things, RISC-V architecture, and basic IoT concepts"),
            difficulty: DifficultyLevel::Beginner,
            estimated_time: 120, // 2 hours
            prerequisites: Vec::new(),
            exercises: Vec::new(),
            examples: Vec::new(),
            quiz_questions: Vec::new(),
            hands_on_projects: Vec::new(),
            completed: false,
            progress_percentage: 0,
        };
        
        // Add exercises for Module 1
        module1.exercises.push(Exercise {
            exercise_id: String::from("hello_riscv"),
            title: String::from("Hello RISC-V World"),
            description: String::from("Write your first RISC-V program that blinks an LED"),
            code_template: String::from(concat!(
                "// Complete the LED blink program for RISC-V\n",
                "#![no_std]\n",
                "#![no_main]\n",
                "\n",
                "use riscv_hal::*;\n",
                "\n",
                "#[no_mangle]\n",
                "pub extern \"C\" fn main() -> ! {\n",
                "    // Initialize GPIO\n",
                "    \n",
                "    loop {\n",
                "        // Turn LED on\n",
                "        \n",
                "        // Wait 1 second\n",
                "        \n",
                "        // Turn LED off\n",
                "        \n",
                "        // Wait 1 second\n",
                "    }\n",
                "}"
            )),
            expected_output: String::from("LED blinking at 1Hz frequency"),
            hints: vec![
                String::from("Look for GPIO pin configuration"),
                String::from("Use delay_ms() for timing"),
                String::from("Check LED pin assignment"),
            ],
            solution_available: false,
            time_limit_minutes: 30,
            points: 10,
        });
        
        self.modules.insert(1, module1).unwrap_or(());
        
        // Module 2: Sensor Integration
        let module2 = LearningModule {
            module_id: 2,
            title: String::from("Sensor Integration and Data Reading"),
            description: String::from("Learn to integrate various sensors and process sensor data"),
            difficulty: DifficultyLevel::Intermediate,
            estimated_time: 180, // 3 hours
            prerequisites: vec![1],
            exercises: Vec::new(),
            examples: Vec::new(),
            quiz_questions: Vec::new(),
            hands_on_projects: Vec::new(),
            completed: false,
            progress_percentage: 0,
        };
        
        self.modules.insert(2, module2).unwrap_or(());
        
        // Module 3: Communication Protocols
        let module3 = LearningModule {
            module_id: 3,
            title: String::from("IoT Communication Protocols"),
            description: String::from("Master MQTT, LoRaWAN, WiFi, and other communication protocols"),
            difficulty: DifficultyLevel::Intermediate,
            estimated_time: 240, // 4 hours
            prerequisites: vec![1, 2],
            exercises: Vec::new(),
            examples: Vec::new(),
            quiz_questions: Vec::new(),
            hands_on_projects: Vec::new(),
            completed: false,
            progress_percentage: 0,
        };
        
        self.modules.insert(3, module3).unwrap_or(());
        
        println!("  ✅ Learning modules created: 3 modules");
        Ok(())
    }

    fn create_code_examples(&mut self) -> Result<(), EducationalFrameworkError> {
        // Hello World Example
        self.code_examples.push(CodeExample {
            example_id: String::from("hello_world"),
            title: String::from("Hello World on RISC-V"),
            description: String::from("First program to display text and initialize basic hardware"),
            code: String::from(concat!(
                "// Hello World Example for RISC-V IoT\n",
                "#![no_std]\n",
                "#![no_main]\n",
                "\n",
                "use riscv_hal::*;\n",
                "\n",
                "#[no_mangle]\n",
                "pub extern \"C\" fn main() -> ! {\n",
                "    // Initialize system\n",
                "    init_system(SystemConfig::default());\n",
                "    \n",
                "    // Print welcome message\n",
                "    println!(\"Hello from RISC-V IoT!\");\n",
                "    println!(\"System initialized successfully\");\n",
                "    \n",
                "    loop {}\n",
                "}"
            )),
            explanation: String::from("This example shows the basic structure of a RISC-V IoT program. It includes system initialization and basic console output."),
            complexity: CodeComplexity::Simple,
            category: CodeCategory::HelloWorld,
        });
        
        // Sensor Reading Example
        self.code_examples.push(CodeExample {
            example_id: String::from("sensor_reading"),
            title: String::from("Reading Temperature Sensor"),
            description: String::from("How to read from a DHT22 temperature and humidity sensor"),
            code: String::from(concat!(
                "// Temperature Sensor Reading Example\n",
                "use riscv_hal::*;\n",
                "\n",
                "fn read_temperature() -> Result<(i16, u16), SensorError> {\n",
                "    // Initialize I2C for sensor communication\n",
                "    let i2c = I2CBus::new(I2C0_BASE);\n",
                "    \n",
                "    // Read temperature data\n",
                "    let temp_raw = read_sensor_register(&i2c, TEMP_REG)?;\n",
                "    let humidity_raw = read_sensor_register(&i2c, HUMIDITY_REG)?;\n",
                "    \n",
                "    // Convert raw data to human-readable format\n",
                "    let temperature = convert_temperature(temp_raw);\n",
                "    let humidity = convert_humidity(humidity_raw);\n",
                "    \n",
                "    Ok((temperature, humidity))\n",
                "}"
            )),
            explanation: String::from("This example demonstrates reading from a digital temperature sensor using I2C communication and converting raw sensor data to meaningful values."),
            complexity: CodeComplexity::Medium,
            category: CodeCategory::SensorReading,
        });
        
        println!("  ✅ Code examples created: {} examples", self.code_examples.len());
        Ok(())
    }

    fn create_project_templates(&mut self) -> Result<(), EducationalFrameworkError> {
        // Project Template 1: Smart Weather Station
        let weather_station = ProjectTemplate {
            project_id: String::from("weather_station"),
            title: String::from("Smart Weather Station"),
            description: String::from("Build a complete weather monitoring station with multiple sensors and data logging"),
            difficulty: DifficultyLevel::Intermediate,
            estimated_hours: 12,
            required_hardware: vec![
                String::from("RISC-V development board"),
                String::from("DHT22 temperature sensor"),
                String::from("BMP280 barometric sensor"),
                String::from("Wind speed sensor"),
                String::from("Rain gauge"),
                String::from("OLED display"),
            ],
            learning_objectives: vec![
                String::from("Integrate multiple sensor types"),
                String::from("Implement data logging and storage"),
                String::from("Create a user interface with display"),
                String::from("Set up wireless communication"),
                String::from("Deploy to cloud platform"),
            ],
            implementation_steps: vec![
                ImplementationStep {
                    step_number: 1,
                    title: String::from("Hardware Setup"),
                    description: String::from("Connect all sensors to the development board"),
                    code_snippets: vec![String::from("Hardware connection diagram and pin assignments")],
                    expected_result: String::from("All sensors properly connected and powered"),
                    verification_method: String::from("Visual inspection and multimeter testing"),
                },
                ImplementationStep {
                    step_number: 2,
                    title: String::from("Basic Sensor Reading"),
                    description: String::from("Write code to read from each sensor individually"),
                    code_snippets: vec![String::from("Sample code for DHT22, BMP280, and wind sensor")],
                    expected_result: String::from("All sensors returning valid data"),
                    verification_method: String::from("Serial output showing sensor values"),
                },
            ],
            resources: vec![
                String::from("DHT22 datasheet"),
                String::from("BMP280 library documentation"),
                String::from("Weather station design patterns"),
            ],
            assessment_criteria: vec![
                String::from("All sensors reading correctly"),
                String::from("Data accuracy within 5%"),
                String::from("Reliable operation for 24 hours"),
                String::from("Code documentation complete"),
            ],
        };
        
        self.project_templates.push(weather_station);
        
        println!("  ✅ Project templates created: {} templates", self.project_templates.len());
        Ok(())
    }

    fn create_virtual_lab(&mut self) -> Result<(), EducationalFrameworkError> {
        // Create virtual devices for hands-on learning
        
        // Virtual Weather Station
        let mut virtual_device = VirtualDevice {
            device_id: String::from("virtual_weather_01"),
            device_type: String::from("Weather Station"),
            simulated_sensors: FnvIndexMap::new(),
            capabilities: vec![
                String::from("temperature_reading"),
                String::from("humidity_reading"),
                String::from("pressure_reading"),
                String::from("wind_monitoring"),
                String::from("data_logging"),
            ],
        };
        
        // Add virtual sensors
        virtual_device.simulated_sensors.insert(String::from("temp_sensor"), VirtualSensor {
            sensor_id: String::from("temp_sensor"),
            sensor_type: String::from("DHT22"),
            current_value: 23.5,
            range_min: -40.0,
            range_max: 80.0,
            update_frequency_hz: 1,
        }).unwrap_or(());
        
        virtual_device.simulated_sensors.insert(String::from("humidity_sensor"), VirtualSensor {
            sensor_id: String::from("humidity_sensor"),
            sensor_type: String::from("DHT22"),
            current_value: 65.0,
            range_min: 0.0,
            range_max: 100.0,
            update_frequency_hz: 1,
        }).unwrap_or(());
        
        self.virtual_lab.virtual_devices.insert(
            virtual_device.device_id.clone(), 
            virtual_device
        ).unwrap_or(());
        
        println!("  ✅ Virtual lab created: {} virtual devices", self.virtual_lab.virtual_devices.len());
        Ok(())
    }

    fn init_learning_platform(&mut self) -> Result<(), EducationalFrameworkError> {
        // Initialize communication for cloud-based learning platform
        #[cfg(feature = "wifi")]
        {
            println!("  - WiFi enabled for cloud learning platform");
        }
        
        #[cfg(feature = "mqtt")]
        {
            println!("  - MQTT enabled for real-time collaboration");
        }
        
        println!("  ✅ Learning platform communication initialized");
        Ok(())
    }

    /// Main educational loop
    pub fn run(&mut self) -> ! {
        let mut current_lesson = 0u8;
        let mut interactive_mode = true;
        
        println!("\n🎓 Welcome to the RISC-V IoT Educational Framework!");
        println!("Choose your learning path:");
        println!("1. Interactive Tutorial Mode");
        println!("2. Code Example Explorer");
        println!("3. Project Template Builder");
        println!("4. Virtual Lab Access");
        println!("5. Assessment and Quiz");
        
        // Simulate user selection for demo
        current_lesson = 1;
        interactive_mode = true;
        
        loop {
            if interactive_mode {
                self.run_interactive_tutorial(current_lesson);
            } else {
                self.run_autonomous_mode();
            }
            
            // Small delay before next iteration
            delay_ms(1000);
        }
    }

    fn run_interactive_tutorial(&mut self, lesson_id: u8) {
        if let Some(module) = self.modules.get(&lesson_id) {
            println!("\n📖 Module {}: {}", module.module_id, module.title);
            println!("📝 Description: {}", module.description);
            println!("⏱️  Estimated time: {} minutes", module.estimated_time);
            println!("🎯 Difficulty: {:?}", module.difficulty);
            
            // Show progress
            println!("📊 Progress: {}%", module.progress_percentage);
            
            // Run through exercises if any
            for (i, exercise) in module.exercises.iter().enumerate() {
                println!("\n💡 Exercise {}: {}", i + 1, exercise.title);
                println!("📋 Instructions: {}", exercise.description);
                
                // Simulate code execution
                self.simulate_code_execution(&exercise.code_template);
                
                println!("✅ Exercise completed! Points earned: {}", exercise.points);
            }
            
            // Simulate quiz
            if !module.quiz_questions.is_empty() {
                self.run_quiz(&module.quiz_questions);
            }
            
            // Update progress
            if let Some(module_mut) = self.modules.get_mut(&lesson_id) {
                module_mut.progress_percentage = 100;
                module_mut.completed = true;
                println!("🎉 Module {} completed successfully!", module.module_id);
            }
        }
    }

    fn simulate_code_execution(&self, code: &str) {
        println!("🔧 Executing code...");
        println!("📤 Output:");
        println!("   Code compiled successfully");
        println!("   Running on RISC-V virtual machine...");
        println!("   ✓ Hardware initialization complete");
        println!("   ✓ GPIO pins configured");
        println!("   ✓ LED blinking at 1Hz");
        println!("📥 Exit code: 0 (Success)");
    }

    fn run_quiz(&self, questions: &[QuizQuestion]) {
        println!("\n❓ Starting quiz...");
        
        let mut score = 0u8;
        
        for (i, question) in questions.iter().enumerate() {
            println!("\nQuestion {}: {}", i + 1, question.question);
            
            match question.question_type {
                QuestionType::MultipleChoice => {
                    for (j, option) in question.options.iter().enumerate() {
                        println!("   {}. {}", (j + 1) as char, option);
                    }
                    // Simulate correct answer selection
                    println!("   Selected answer: {}", (question.correct_answer + 1) as char);
                },
                QuestionType::TrueFalse => {
                    println!("   True or False?");
                    println!("   Selected: True");
                },
                _ => {
                    println!("   (Answer not shown in demo)");
                }
            }
            
            println!("   ✓ Correct! +{} points", question.points);
            score += question.points;
        }
        
        println!("\n🎯 Quiz completed! Total score: {}/{}", 
                score, questions.iter().map(|q| q.points).sum::<u8>());
    }

    fn run_autonomous_mode(&mut self) {
        println!("🔄 Running autonomous learning mode...");
        
        // Automatically progress through available modules
        for (module_id, module) in &self.modules {
            if !module.completed {
                println!("📚 Automatically advancing to module {}", module_id);
                self.run_interactive_tutorial(*module_id);
                break;
            }
        }
    }

    // Virtual lab simulation
    fn run_virtual_lab(&mut self) {
        println!("\n🖥️  Entering Virtual Lab...");
        
        for (device_id, device) in &self.virtual_lab.virtual_devices {
            println!("\n📱 Virtual Device: {}", device.device_id);
            println!("   Type: {}", device.device_type);
            println!("   Capabilities: {}", device.capabilities.len());
            
            // Simulate sensor readings
            for (sensor_id, sensor) in &device.simulated_sensors {
                println!("   🔌 {}: {}°{} (simulated)", 
                        sensor.sensor_type, 
                        sensor.current_value,
                        if sensor.sensor_id.contains("temp") { "C" } else { "%" });
            }
        }
    }

    // Code example explorer
    fn explore_code_examples(&self) {
        println!("\n💻 Code Example Explorer");
        
        for example in &self.code_examples {
            println!("\n📄 {}: {}", example.example_id, example.title);
            println!("   📝 {}", example.description);
            println!("   🔢 Complexity: {:?}", example.complexity);
            println!("   🏷️  Category: {:?}", example.category);
            
            // Show code snippet (first few lines)
            let code_lines: Vec<&str> = example.code.split('\n').collect();
            println!("   💾 Code preview:");
            for line in code_lines.iter().take(5) {
                println!("      {}", line);
            }
            if code_lines.len() > 5 {
                println!("      ... ({} more lines)", code_lines.len() - 5);
            }
        }
    }

    // Project template showcase
    fn showcase_projects(&self) {
        println!("\n🔨 Project Template Showcase");
        
        for project in &self.project_templates {
            println!("\n📋 {}: {}", project.project_id, project.title);
            println!("   📝 {}", project.description);
            println!("   ⏱️  Estimated time: {} hours", project.estimated_hours);
            println!("   🎯 Difficulty: {:?}", project.difficulty);
            println!("   🛠️  Required hardware: {}", project.required_hardware.len());
            println!("   📈 Learning objectives: {}", project.learning_objectives.len());
            println!("   📋 Implementation steps: {}", project.implementation_steps.len());
        }
    }
}

#[derive(Debug)]
pub enum EducationalFrameworkError {
    ModuleCreationFailed,
    CodeExampleError,
    ProjectTemplateError,
    VirtualLabError,
    CommunicationError,
}

// RISC-V entry point
#[no_mangle]
pub extern "C" fn main() -> ! {
    // Initialize system
    let config = SystemConfig {
        core_frequency_hz: 50_000_000,
        memory_size: 256 * 1024,
        interrupt_controller: InterruptType::PLIC,
        power_management: PowerMode::Normal,
    };
    init_system(config);
    
    // Create educational framework
    let mut framework = EducationalFramework::new();
    
    if let Ok(_) = framework.init() {
        framework.run();
    } else {
        println!("❌ Failed to initialize educational framework");
        loop {}
    }
}