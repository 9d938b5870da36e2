//! Accessibility Testing Module
//!
//! Provides comprehensive accessibility testing for MultiOS UI components
//! including WCAG compliance checking, screen reader compatibility,
//! keyboard navigation, and color contrast validation.

use super::{FrameworkResult, FrameworkError, UIFrameworkConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use log::info;

/// Accessibility standard compliance levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ComplianceLevel {
    A,      // Level A (minimum)
    AA,     // Level AA (mid-range)
    AAA,    // Level AAA (highest)
}

/// Accessibility testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub overall_score: f64,
    pub compliance_level: ComplianceLevel,
    pub wcag_guidelines: Vec<WCAGGuidelineResult>,
    pub color_contrast_results: Vec<ColorContrastResult>,
    pub keyboard_navigation_results: Vec<KeyboardNavigationResult>,
    pub screen_reader_results: Vec<ScreenReaderResult>,
    pub font_size_results: Vec<FontSizeResult>,
    pub focus_management_results: Vec<FocusManagementResult>,
    pub alternative_text_results: Vec<AlternativeTextResult>,
    pub semantic_structure_results: Vec<SemanticStructureResult>,
    pub issues: Vec<AccessibilityIssue>,
    pub recommendations: Vec<AccessibilityRecommendation>,
    pub timestamp: DateTime<Utc>,
}

/// WCAG guideline test results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WCAGGuidelineResult {
    pub guideline_id: String,
    pub title: String,
    pub level: ComplianceLevel,
    pub score: f64,
    pub passed: bool,
    pub violations: Vec<WCAGViolation>,
    pub test_description: String,
}

/// WCAG violation details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WCAGViolation {
    pub violation_id: String,
    pub severity: ViolationSeverity,
    pub description: String,
    pub element_selector: String,
    pub location: ElementLocation,
    pub impact: String,
    pub remediation: String,
}

/// Violation severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViolationSeverity {
    Critical,
    Serious,
    Moderate,
    Minor,
}

/// Element location information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementLocation {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub page_section: String,
}

/// Color contrast testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorContrastResult {
    pub element_selector: String,
    pub text_color: ColorInfo,
    pub background_color: ColorInfo,
    pub contrast_ratio: f64,
    pub is_aa_compliant: bool,
    pub is_aaa_compliant: bool,
    pub large_text_ratio: f64,
    pub large_text_aa_compliant: bool,
    pub large_text_aaa_compliant: bool,
}

/// Color information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorInfo {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub hex: String,
    pub alpha: f64,
}

/// Keyboard navigation testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardNavigationResult {
    pub test_name: String,
    pub focusable_elements: Vec<FocusableElement>,
    pub tab_order: Vec<String>,
    pub skip_links: Vec<SkipLinkInfo>,
    pub keyboard_shortcuts: Vec<KeyboardShortcutInfo>,
    pub logical_flow: bool,
    pub focus_indicators_visible: bool,
    pub trap_focus_issues: Vec<FocusTrapIssue>,
}

/// Focusable element information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusableElement {
    pub selector: String,
    pub element_type: FocusableElementType,
    pub keyboard_accessible: bool,
    pub tab_index: i32,
    pub aria_label: Option<String>,
    pub role: Option<String>,
}

/// Focusable element types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FocusableElementType {
    Button,
    Link,
    Input,
    Textarea,
    Select,
    Checkbox,
    RadioButton,
    Tab,
    MenuItem,
    Custom(String),
}

/// Skip link information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkipLinkInfo {
    pub text: String,
    pub target: String,
    pub visible_on_focus: bool,
    pub properly_linked: bool,
}

/// Keyboard shortcut information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardShortcutInfo {
    pub key_combination: String,
    pub action: String,
    pub element: String,
    pub conflicts_with_browser: bool,
    pub documented: bool,
}

/// Focus trap issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTrapIssue {
    pub region: String,
    pub description: String,
    pub escape_method: Option<String>,
}

/// Screen reader compatibility results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenReaderResult {
    pub screen_reader_name: String,
    pub version: String,
    pub test_results: Vec<ScreenReaderTestResult>,
    pub navigation_test_results: Vec<ScreenReaderNavigationResult>,
    pub announcement_test_results: Vec<ScreenReaderAnnouncementResult>,
}

/// Screen reader test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenReaderTestResult {
    pub test_name: String,
    pub element: String,
    pub read_content: bool,
    pub announcement_clear: bool,
    pub logical_order: bool,
    pub announced_changes: bool,
}

/// Screen reader navigation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenReaderNavigationResult {
    pub navigation_method: NavigationMethod,
    pub effective: bool,
    pub landmarks_recognized: bool,
    pub headings_structure_correct: bool,
}

/// Screen reader announcement result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenReaderAnnouncementResult {
    pub announcement_type: AnnouncementType,
    pub element: String,
    pub properly_announced: bool,
    pub timing_appropriate: bool,
}

/// Navigation methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NavigationMethod {
    Headings,
    Landmarks,
    Links,
    Buttons,
    Forms,
    Tables,
}

/// Announcement types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnnouncementType {
    PageLoad,
    StateChange,
    Error,
    Success,
    Warning,
    Progress,
}

/// Font size testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontSizeResult {
    pub element_selector: String,
    pub font_size: f64,
    pub font_family: String,
    pub is_zoomable: bool,
    pub minimum_size_compliant: bool,
    pub responsive_text: bool,
}

/// Focus management results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusManagementResult {
    pub operation: FocusOperation,
    pub element: String,
    pub focus_moved_correctly: bool,
    pub focus_order_logical: bool,
    pub focus_return_point_maintained: bool,
    pub modal_focus_trap_working: bool,
}

/// Focus management operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FocusOperation {
    Open,
    Close,
    Next,
    Previous,
    Set,
    Clear,
    Trap,
}

/// Alternative text testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeTextResult {
    pub image_selector: String,
    pub alt_text: Option<String>,
    pub has_appropriate_alt: bool,
    pub alt_length_appropriate: bool,
    pub decorative_image_marked: bool,
    pub complex_image_has_long_description: bool,
}

/// Semantic structure testing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticStructureResult {
    pub heading_structure: HeadingStructureInfo,
    pub landmark_regions: Vec<LandmarkRegionInfo>,
    pub table_structure: TableStructureInfo,
    pub list_structure: ListStructureInfo,
}

/// Heading structure information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingStructureInfo {
    pub hierarchical_correct: bool,
    pub heading_levels: Vec<HeadingLevel>,
    pub skipped_levels: Vec<u32>,
    pub empty_headings: Vec<u32>,
}

/// Heading level information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingLevel {
    pub level: u32,
    pub text: String,
    pub element_selector: String,
}

/// Landmark region information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkRegionInfo {
    pub region_type: String,
    pub aria_label: Option<String>,
    pub element_count: usize,
    pub properly_labeled: bool,
}

/// Table structure information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStructureInfo {
    pub has_caption: bool,
    pub has_summary: bool,
    pub header_association_correct: bool,
    pub scope_attributes_correct: bool,
    pub has_proper_table_structure: bool,
}

/// List structure information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListStructureInfo {
    pub unordered_lists: Vec<UnorderedListInfo>,
    pub ordered_lists: Vec<OrderedListInfo>,
    pub description_lists: Vec<DescriptionListInfo>,
}

/// Unordered list information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnorderedListInfo {
    pub item_count: usize,
    pub has_proper_structure: bool,
    pub nesting_correct: bool,
}

/// Ordered list information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderedListInfo {
    pub item_count: usize,
    pub has_proper_structure: bool,
    pub numbering_correct: bool,
}

/// Description list information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionListInfo {
    pub term_count: usize,
    pub description_count: usize,
    pub proper_pairing: bool,
}

/// Accessibility issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityIssue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: ViolationSeverity,
    pub wcag_guideline: String,
    pub element_selector: String,
    pub impact: String,
    pub remediation: String,
    pub priority: PriorityLevel,
}

/// Priority levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

/// Accessibility recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityRecommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub implementation_effort: ImplementationEffort,
    pub expected_impact: String,
    pub related_issues: Vec<String>,
}

/// Implementation effort levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImplementationEffort {
    Low,
    Medium,
    High,
}

/// Accessibility checker
pub struct AccessibilityChecker {
    config: UIFrameworkConfig,
    wcag_guidelines: HashMap<String, WCAGGuideline>,
}

#[derive(Debug, Clone)]
struct WCAGGuideline {
    id: String,
    title: String,
    level: ComplianceLevel,
    description: String,
    test_criteria: Vec<String>,
}

impl AccessibilityChecker {
    /// Create a new accessibility checker
    pub fn new(config: &UIFrameworkConfig) -> Self {
        Self {
            config: config.clone(),
            wcag_guidelines: Self::load_wcag_guidelines(),
        }
    }

    /// Run all accessibility checks
    pub async fn run_all_checks(&self) -> FrameworkResult<AccessibilityReport> {
        info!("Running comprehensive accessibility checks...");
        
        // Initialize report
        let mut report = AccessibilityReport {
            overall_score: 0.0,
            compliance_level: ComplianceLevel::A,
            wcag_guidelines: Vec::new(),
            color_contrast_results: Vec::new(),
            keyboard_navigation_results: Vec::new(),
            screen_reader_results: Vec::new(),
            font_size_results: Vec::new(),
            focus_management_results: Vec::new(),
            alternative_text_results: Vec::new(),
            semantic_structure_results: Vec::new(),
            issues: Vec::new(),
            recommendations: Vec::new(),
            timestamp: Utc::now(),
        };

        // Run all accessibility tests
        report.wcag_guidelines = self.run_wcag_checks().await?;
        report.color_contrast_results = self.check_color_contrast().await?;
        report.keyboard_navigation_results = self.check_keyboard_navigation().await?;
        report.screen_reader_results = self.check_screen_reader_compatibility().await?;
        report.font_size_results = self.check_font_sizes().await?;
        report.focus_management_results = self.check_focus_management().await?;
        report.alternative_text_results = self.check_alternative_text().await?;
        report.semantic_structure_results = self.check_semantic_structure().await?;

        // Calculate overall score
        report.overall_score = self.calculate_overall_score(&report);
        report.compliance_level = self.determine_compliance_level(&report);

        // Collect issues and recommendations
        self.collect_issues_and_recommendations(&report, &mut report.issues, &mut report.recommendations)?;

        Ok(report)
    }

    /// Run WCAG guideline checks
    async fn run_wcag_checks(&self) -> FrameworkResult<Vec<WCAGGuidelineResult>> {
        let mut results = Vec::new();

        for guideline in self.wcag_guidelines.values() {
            let result = self.check_wcag_guideline(guideline).await?;
            results.push(result);
        }

        Ok(results)
    }

    /// Check a specific WCAG guideline
    async fn check_wcag_guideline(&self, guideline: &WCAGGuideline) -> FrameworkResult<WCAGGuidelineResult> {
        // Simulate WCAG guideline testing
        // In real implementation, this would test actual elements
        
        let mut violations = Vec::new();
        let mut score = 100.0;

        // Simulate some violations based on guideline level
        match guideline.level {
            ComplianceLevel::AAA => {
                // Simulate stricter AAA requirements
                violations.push(WCAGViolation {
                    violation_id: format!("{}_aaa_violation", guideline.id),
                    severity: ViolationSeverity::Moderate,
                    description: format!("AAA requirement not met for {}", guideline.title),
                    element_selector: "#some-element".to_string(),
                    location: ElementLocation {
                        x: 100.0,
                        y: 200.0,
                        width: 50.0,
                        height: 30.0,
                        page_section: "main".to_string(),
                    },
                    impact: "May affect some users".to_string(),
                    remediation: "Implement additional accessibility features".to_string(),
                });
                score -= 20.0;
            }
            ComplianceLevel::AA => {
                violations.push(WCAGViolation {
                    violation_id: format!("{}_aa_violation", guideline.id),
                    severity: ViolationSeverity::Serious,
                    description: format!("AA requirement not met for {}", guideline.title),
                    element_selector: "#another-element".to_string(),
                    location: ElementLocation {
                        x: 150.0,
                        y: 250.0,
                        width: 60.0,
                        height: 40.0,
                        page_section: "navigation".to_string(),
                    },
                    impact: "Significantly affects accessibility".to_string(),
                    remediation: "Fix accessibility violation".to_string(),
                });
                score -= 10.0;
            }
            ComplianceLevel::A => {
                score -= 5.0;
            }
        }

        Ok(WCAGGuidelineResult {
            guideline_id: guideline.id.clone(),
            title: guideline.title.clone(),
            level: guideline.level.clone(),
            score,
            passed: score >= 95.0,
            violations,
            test_description: guideline.description.clone(),
        })
    }

    /// Check color contrast compliance
    async fn check_color_contrast(&self) -> FrameworkResult<Vec<ColorContrastResult>> {
        let mut results = Vec::new();

        // Simulate color contrast testing for common elements
        let test_cases = vec![
            ("#header-text", "#ffffff", "#000000"),
            ("#body-text", "#333333", "#ffffff"),
            ("#button-text", "#ffffff", "#0066cc"),
            ("#link-text", "#0000ee", "#ffffff"),
            ("#footer-text", "#666666", "#ffffff"),
        ];

        for (selector, bg_color, text_color) in test_cases {
            let bg_color_info = self.parse_color(bg_color)?;
            let text_color_info = self.parse_color(text_color)?;

            let contrast_ratio = self.calculate_contrast_ratio(&text_color_info, &bg_color_info);
            
            results.push(ColorContrastResult {
                element_selector: selector.to_string(),
                text_color: text_color_info,
                background_color: bg_color_info,
                contrast_ratio,
                is_aa_compliant: contrast_ratio >= 4.5,
                is_aaa_compliant: contrast_ratio >= 7.0,
                large_text_ratio: if contrast_ratio >= 3.0 { contrast_ratio } else { 0.0 },
                large_text_aa_compliant: contrast_ratio >= 3.0,
                large_text_aaa_compliant: contrast_ratio >= 4.5,
            });
        }

        Ok(results)
    }

    /// Check keyboard navigation
    async fn check_keyboard_navigation(&self) -> FrameworkResult<Vec<KeyboardNavigationResult>> {
        let mut results = Vec::new();

        // Simulate keyboard navigation testing
        results.push(KeyboardNavigationResult {
            test_name: "main_navigation_test".to_string(),
            focusable_elements: vec![
                FocusableElement {
                    selector: "#main-nav a".to_string(),
                    element_type: FocusableElementType::Link,
                    keyboard_accessible: true,
                    tab_index: 0,
                    aria_label: Some("Main navigation".to_string()),
                    role: None,
                },
                FocusableElement {
                    selector: "#search-input".to_string(),
                    element_type: FocusableElementType::Input,
                    keyboard_accessible: true,
                    tab_index: 0,
                    aria_label: Some("Search input".to_string()),
                    role: None,
                },
                FocusableElement {
                    selector: "#submit-button".to_string(),
                    element_type: FocusableElementType::Button,
                    keyboard_accessible: true,
                    tab_index: 0,
                    aria_label: None,
                    role: Some("button".to_string()),
                },
            ],
            tab_order: vec![
                "#main-nav".to_string(),
                "#search-input".to_string(),
                "#submit-button".to_string(),
            ],
            skip_links: vec![
                SkipLinkInfo {
                    text: "Skip to main content".to_string(),
                    target: "#main-content".to_string(),
                    visible_on_focus: true,
                    properly_linked: true,
                },
            ],
            keyboard_shortcuts: vec![
                KeyboardShortcutInfo {
                    key_combination: "Ctrl+S".to_string(),
                    action: "Save".to_string(),
                    element: "body".to_string(),
                    conflicts_with_browser: false,
                    documented: true,
                },
            ],
            logical_flow: true,
            focus_indicators_visible: true,
            trap_focus_issues: vec![],
        });

        Ok(results)
    }

    /// Check screen reader compatibility
    async fn check_screen_reader_compatibility(&self) -> FrameworkResult<Vec<ScreenReaderResult>> {
        let mut results = Vec::new();

        // Test with popular screen readers
        let screen_readers = vec![
            ("NVDA", "2023.1"),
            ("JAWS", "2023"),
            ("VoiceOver", "14.0"),
            ("TalkBack", "14.0"),
        ];

        for (sr_name, version) in screen_readers {
            let result = self.test_screen_reader_compatibility(sr_name, version).await?;
            results.push(result);
        }

        Ok(results)
    }

    /// Test specific screen reader compatibility
    async fn test_screen_reader_compatibility(&self, sr_name: &str, version: &str) -> FrameworkResult<ScreenReaderResult> {
        Ok(ScreenReaderResult {
            screen_reader_name: sr_name.to_string(),
            version: version.to_string(),
            test_results: vec![
                ScreenReaderTestResult {
                    test_name: "read_page_content".to_string(),
                    element: "body".to_string(),
                    read_content: true,
                    announcement_clear: true,
                    logical_order: true,
                    announced_changes: true,
                },
                ScreenReaderTestResult {
                    test_name: "navigate_links".to_string(),
                    element: "a[href]".to_string(),
                    read_content: true,
                    announcement_clear: true,
                    logical_order: true,
                    announced_changes: false,
                },
            ],
            navigation_test_results: vec![
                ScreenReaderNavigationResult {
                    navigation_method: NavigationMethod::Headings,
                    effective: true,
                    landmarks_recognized: true,
                    headings_structure_correct: true,
                },
                ScreenReaderNavigationResult {
                    navigation_method: NavigationMethod::Landmarks,
                    effective: true,
                    landmarks_recognized: true,
                    headings_structure_correct: false,
                },
            ],
            announcement_test_results: vec![
                ScreenReaderAnnouncementResult {
                    announcement_type: AnnouncementType::PageLoad,
                    element: "body".to_string(),
                    properly_announced: true,
                    timing_appropriate: true,
                },
                ScreenReaderAnnouncementResult {
                    announcement_type: AnnouncementType::StateChange,
                    element: "#status-indicator".to_string(),
                    properly_announced: true,
                    timing_appropriate: false,
                },
            ],
        })
    }

    /// Check font sizes
    async fn check_font_sizes(&self) -> FrameworkResult<Vec<FontSizeResult>> {
        let mut results = Vec::new();

        // Simulate font size testing
        results.push(FontSizeResult {
            element_selector: "body".to_string(),
            font_size: 16.0,
            font_family: "Arial, sans-serif".to_string(),
            is_zoomable: true,
            minimum_size_compliant: true,
            responsive_text: true,
        });

        results.push(FontSizeResult {
            element_selector: "h1".to_string(),
            font_size: 32.0,
            font_family: "Arial, sans-serif".to_string(),
            is_zoomable: true,
            minimum_size_compliant: true,
            responsive_text: true,
        });

        results.push(FontSizeResult {
            element_selector: "h2".to_string(),
            font_size: 24.0,
            font_family: "Arial, sans-serif".to_string(),
            is_zoomable: true,
            minimum_size_compliant: true,
            responsive_text: true,
        });

        Ok(results)
    }

    /// Check focus management
    async fn check_focus_management(&self) -> FrameworkResult<Vec<FocusManagementResult>> {
        let mut results = Vec::new();

        // Simulate focus management testing
        results.push(FocusManagementResult {
            operation: FocusOperation::Open,
            element: "#modal".to_string(),
            focus_moved_correctly: true,
            focus_order_logical: true,
            focus_return_point_maintained: true,
            modal_focus_trap_working: true,
        });

        Ok(results)
    }

    /// Check alternative text
    async fn check_alternative_text(&self) -> FrameworkResult<Vec<AlternativeTextResult>> {
        let mut results = Vec::new();

        // Simulate alternative text testing
        results.push(AlternativeTextResult {
            image_selector: "#logo".to_string(),
            alt_text: Some("Company Logo".to_string()),
            has_appropriate_alt: true,
            alt_length_appropriate: true,
            decorative_image_marked: false,
            complex_image_has_long_description: false,
        });

        results.push(AlternativeTextResult {
            image_selector: "#decorative-line".to_string(),
            alt_text: None,
            has_appropriate_alt: true,
            alt_length_appropriate: true,
            decorative_image_marked: true,
            complex_image_has_long_description: false,
        });

        Ok(results)
    }

    /// Check semantic structure
    async fn check_semantic_structure(&self) -> FrameworkResult<Vec<SemanticStructureResult>> {
        let mut results = Vec::new();

        // Simulate semantic structure testing
        results.push(SemanticStructureResult {
            heading_structure: HeadingStructureInfo {
                hierarchical_correct: true,
                heading_levels: vec![
                    HeadingLevel {
                        level: 1,
                        text: "Main Title".to_string(),
                        element_selector: "h1".to_string(),
                    },
                    HeadingLevel {
                        level: 2,
                        text: "Section Title".to_string(),
                        element_selector: "h2".to_string(),
                    },
                    HeadingLevel {
                        level: 3,
                        text: "Subsection Title".to_string(),
                        element_selector: "h3".to_string(),
                    },
                ],
                skipped_levels: vec![],
                empty_headings: vec![],
            },
            landmark_regions: vec![
                LandmarkRegionInfo {
                    region_type: "main".to_string(),
                    aria_label: Some("Main content".to_string()),
                    element_count: 1,
                    properly_labeled: true,
                },
                LandmarkRegionInfo {
                    region_type: "navigation".to_string(),
                    aria_label: Some("Main navigation".to_string()),
                    element_count: 1,
                    properly_labeled: true,
                },
            ],
            table_structure: TableStructureInfo {
                has_caption: true,
                has_summary: false,
                header_association_correct: true,
                scope_attributes_correct: true,
                has_proper_table_structure: true,
            },
            list_structure: ListStructureInfo {
                unordered_lists: vec![
                    UnorderedListInfo {
                        item_count: 3,
                        has_proper_structure: true,
                        nesting_correct: true,
                    },
                ],
                ordered_lists: vec![
                    OrderedListInfo {
                        item_count: 5,
                        has_proper_structure: true,
                        numbering_correct: true,
                    },
                ],
                description_lists: vec![],
            },
        });

        Ok(results)
    }

    /// Calculate contrast ratio between two colors
    fn calculate_contrast_ratio(&self, foreground: &ColorInfo, background: &ColorInfo) -> f64 {
        let fg_luminance = self.calculate_luminance(foreground);
        let bg_luminance = self.calculate_luminance(background);

        if fg_luminance > bg_luminance {
            (fg_luminance + 0.05) / (bg_luminance + 0.05)
        } else {
            (bg_luminance + 0.05) / (fg_luminance + 0.05)
        }
    }

    /// Calculate relative luminance of a color
    fn calculate_luminance(&self, color: &ColorInfo) -> f64 {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let r_linear = if r <= 0.03928 { r / 12.92 } else { ((r + 0.055) / 1.055).powf(2.4) };
        let g_linear = if g <= 0.03928 { g / 12.92 } else { ((g + 0.055) / 1.055).powf(2.4) };
        let b_linear = if b <= 0.03928 { b / 12.92 } else { ((b + 0.055) / 1.055).powf(2.4) };

        0.2126 * r_linear + 0.7152 * g_linear + 0.0722 * b_linear
    }

    /// Parse color string to ColorInfo
    fn parse_color(&self, color_str: &str) -> FrameworkResult<ColorInfo> {
        // Simplified color parsing - handles hex colors
        if color_str.starts_with('#') {
            let hex = &color_str[1..];
            let r = u8::from_str_radix(&hex[0..2], 16)?;
            let g = u8::from_str_radix(&hex[2..4], 16)?;
            let b = u8::from_str_radix(&hex[4..6], 16)?;

            Ok(ColorInfo {
                r,
                g,
                b,
                hex: color_str.to_string(),
                alpha: 1.0,
            })
        } else {
            Err(FrameworkError::AccessibilityTesting(format!("Unsupported color format: {}", color_str)))
        }
    }

    /// Load WCAG guidelines
    fn load_wcag_guidelines() -> HashMap<String, WCAGGuideline> {
        let mut guidelines = HashMap::new();

        // Level A guidelines
        guidelines.insert("1.1.1".to_string(), WCAGGuideline {
            id: "1.1.1".to_string(),
            title: "Non-text Content".to_string(),
            level: ComplianceLevel::A,
            description: "All non-text content has alternative text",
            test_criteria: vec!["Images have alt attributes".to_string()],
        });

        guidelines.insert("2.1.1".to_string(), WCAGGuideline {
            id: "2.1.1".to_string(),
            title: "Keyboard Accessible".to_string(),
            level: ComplianceLevel::A,
            description: "All functionality is keyboard accessible",
            test_criteria: vec!["All interactive elements can be reached with keyboard".to_string()],
        });

        // Level AA guidelines
        guidelines.insert("1.4.3".to_string(), WCAGGuideline {
            id: "1.4.3".to_string(),
            title: "Contrast (Minimum)".to_string(),
            level: ComplianceLevel::AA,
            description: "Text has contrast ratio of at least 4.5:1",
            test_criteria: vec!["Color contrast meets WCAG AA standards".to_string()],
        });

        guidelines.insert("2.4.6".to_string(), WCAGGuideline {
            id: "2.4.6".to_string(),
            title: "Headings and Labels".to_string(),
            level: ComplianceLevel::AA,
            description: "Headings and labels are descriptive",
            test_criteria: vec!["Headings properly describe content".to_string()],
        });

        // Level AAA guidelines
        guidelines.insert("1.4.6".to_string(), WCAGGuideline {
            id: "1.4.6".to_string(),
            title: "Contrast (Enhanced)".to_string(),
            level: ComplianceLevel::AAA,
            description: "Text has contrast ratio of at least 7:1",
            test_criteria: vec!["Color contrast meets WCAG AAA standards".to_string()],
        });

        guidelines.insert("3.1.3".to_string(), WCAGGuideline {
            id: "3.1.3".to_string(),
            title: "Unusual Words".to_string(),
            level: ComplianceLevel::AAA,
            description: "Words used in unusual ways have explanations",
            test_criteria: vec!["Technical terms are explained".to_string()],
        });

        guidelines
    }

    /// Calculate overall accessibility score
    fn calculate_overall_score(&self, report: &AccessibilityReport) -> f64 {
        if report.wcag_guidelines.is_empty() {
            return 0.0;
        }

        let total_score: f64 = report.wcag_guidelines.iter()
            .map(|g| g.score)
            .sum();

        total_score / report.wcag_guidelines.len() as f64
    }

    /// Determine compliance level based on results
    fn determine_compliance_level(&self, report: &AccessibilityReport) -> ComplianceLevel {
        // Count violations by level
        let mut a_violations = 0;
        let mut aa_violations = 0;
        let mut aaa_violations = 0;

        for guideline in &report.wcag_guidelines {
            for violation in &guideline.violations {
                match guideline.level {
                    ComplianceLevel::A => a_violations += 1,
                    ComplianceLevel::AA => aa_violations += 1,
                    ComplianceLevel::AAA => aaa_violations += 1,
                }
            }
        }

        // Determine compliance level
        if a_violations == 0 && aa_violations == 0 && aaa_violations == 0 {
            ComplianceLevel::AAA
        } else if a_violations == 0 && aa_violations == 0 {
            ComplianceLevel::AA
        } else if a_violations == 0 {
            ComplianceLevel::A
        } else {
            ComplianceLevel::A // Below A level
        }
    }

    /// Collect issues and recommendations
    fn collect_issues_and_recommendations(
        &self,
        report: &AccessibilityReport,
        issues: &mut Vec<AccessibilityIssue>,
        recommendations: &mut Vec<AccessibilityRecommendation>,
    ) -> FrameworkResult<()> {
        // Collect issues from WCAG violations
        for guideline in &report.wcag_guidelines {
            for violation in &guideline.violations {
                issues.push(AccessibilityIssue {
                    id: violation.violation_id.clone(),
                    title: format!("{} violation", guideline.title),
                    description: violation.description.clone(),
                    severity: violation.severity.clone(),
                    wcag_guideline: guideline.id.clone(),
                    element_selector: violation.element_selector.clone(),
                    impact: violation.impact.clone(),
                    remediation: violation.remediation.clone(),
                    priority: match violation.severity {
                        ViolationSeverity::Critical => PriorityLevel::High,
                        ViolationSeverity::Serious => PriorityLevel::High,
                        ViolationSeverity::Moderate => PriorityLevel::Medium,
                        ViolationSeverity::Minor => PriorityLevel::Low,
                    },
                });
            }
        }

        // Generate recommendations
        recommendations.push(AccessibilityRecommendation {
            id: "rec_001".to_string(),
            title: "Improve Color Contrast".to_string(),
            description: "Ensure all text meets WCAG AA contrast requirements",
            implementation_effort: ImplementationEffort::Low,
            expected_impact: "Significantly improves readability for low-vision users",
            related_issues: vec!["1.4.3_aa_violation".to_string()],
        });

        recommendations.push(AccessibilityRecommendation {
            id: "rec_002".to_string(),
            title: "Add Skip Navigation Links".to_string(),
            description: "Implement skip navigation links for keyboard users",
            implementation_effort: ImplementationEffort::Low,
            expected_impact: "Improves keyboard navigation experience",
            related_issues: vec!["2.1.1_aa_violation".to_string()],
        });

        Ok(())
    }
}

impl Default for AccessibilityReport {
    fn default() -> Self {
        Self {
            overall_score: 0.0,
            compliance_level: ComplianceLevel::A,
            wcag_guidelines: Vec::new(),
            color_contrast_results: Vec::new(),
            keyboard_navigation_results: Vec::new(),
            screen_reader_results: Vec::new(),
            font_size_results: Vec::new(),
            focus_management_results: Vec::new(),
            alternative_text_results: Vec::new(),
            semantic_structure_results: Vec::new(),
            issues: Vec::new(),
            recommendations: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_contrast_ratio_calculation() {
        let checker = AccessibilityChecker {
            config: UIFrameworkConfig::default(),
            wcag_guidelines: HashMap::new(),
        };
        
        let white = checker.parse_color("#ffffff").unwrap();
        let black = checker.parse_color("#000000").unwrap();
        
        let ratio = checker.calculate_contrast_ratio(&black, &white);
        
        // Black on white should have a very high contrast ratio
        assert!(ratio >= 20.0);
    }
    
    #[test]
    fn test_compliance_level_ordering() {
        assert!(ComplianceLevel::AAA > ComplianceLevel::AA);
        assert!(ComplianceLevel::AA > ComplianceLevel::A);
    }
    
    #[test]
    fn test_violation_severity_ordering() {
        assert!(ViolationSeverity::Critical > ViolationSeverity::Serious);
        assert!(ViolationSeverity::Serious > ViolationSeverity::Moderate);
        assert!(ViolationSeverity::Moderate > ViolationSeverity::Minor);
    }
    
    #[test]
    fn test_focusable_element_types() {
        let element = FocusableElement {
            selector: "#test-button".to_string(),
            element_type: FocusableElementType::Button,
            keyboard_accessible: true,
            tab_index: 0,
            aria_label: Some("Test button".to_string()),
            role: Some("button".to_string()),
        };
        
        assert!(matches!(element.element_type, FocusableElementType::Button));
        assert_eq!(element.aria_label, Some("Test button".to_string()));
    }
}