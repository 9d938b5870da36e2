//! ARM64 Mobile UI Adaptations
//! 
//! This module provides UI adaptations for ARM64 mobile devices, including
//! responsive layouts, touch-friendly interfaces, mobile-specific widgets,
//! orientation handling, and adaptive UI components.

use crate::log::{info, warn, error};
use crate::KernelError;

/// Mobile UI device categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MobileDeviceCategory {
    Smartphone = 0,      // Small phone screen
    Tablet = 1,          // Medium tablet screen
    LargeTablet = 2,     // Large tablet screen
    Desktop = 3,         // Desktop monitor
    Unknown = 255,
}

/// Screen orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScreenOrientation {
    Portrait = 0,        // Vertical orientation
    Landscape = 1,       // Horizontal orientation
    PortraitInverted = 2, // Portrait inverted (180°)
    LandscapeInverted = 3, // Landscape inverted (180°)
}

/// UI density classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum UiDensity {
    Low = 0,             // Low density (large elements)
    Normal = 1,          // Normal density (standard)
    High = 2,            // High density (small elements)
    ExtraHigh = 3,       // Extra high density (very small)
}

/// Touch interaction modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TouchMode {
    SingleTouch = 0,     // Single touch only
    MultiTouch = 1,      // Multi-touch support
    GestureOnly = 2,     // Gesture recognition only
    StylusOnly = 3,      // Stylus input only
    Hybrid = 4,          // Touch + stylus + gesture
}

/// UI scaling modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScalingMode {
    Fixed = 0,           // Fixed size elements
    Responsive = 1,      // Responsive to screen size
    DensityAware = 2,    // Aware of display density
    Adaptive = 3,        // Adapt to device type
    Auto = 4,            // Automatic scaling
}

/// Mobile UI display information
#[derive(Debug, Clone, Copy)]
pub struct MobileDisplayInfo {
    pub width_px: u32,           // Screen width in pixels
    pub height_px: u32,          // Screen height in pixels
    pub density_dpi: u32,        // Display density in DPI
    pub pixel_density: f32,      // Pixel density (pixels per inch)
    pub scale_factor: f32,       // UI scale factor
    pub device_category: MobileDeviceCategory,
    pub orientation: ScreenOrientation,
    pub safe_area_insets: SafeAreaInsets,
    pub notch_info: NotchInfo,
}

/// Safe area insets for notched displays
#[derive(Debug, Clone, Copy)]
pub struct SafeAreaInsets {
    pub top: u32,                // Top safe area (notch)
    pub bottom: u32,             // Bottom safe area (home indicator)
    pub left: u32,               // Left safe area
    pub right: u32,              // Right safe area
}

/// Notch information for modern smartphones
#[derive(Debug, Clone, Copy)]
pub struct NotchInfo {
    pub has_notch: bool,         // Has display notch
    pub notch_type: NotchType,   // Type of notch
    pub notch_width_px: u32,     // Notch width
    pub notch_height_px: u32,    // Notch height
    pub notch_depth_px: u32,     // Notch depth
}

/// Notch types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotchType {
    None = 0,            // No notch
    Notch = 1,           // Standard notch
    PunchHole = 2,       // Punch-hole camera
    CameraModule = 3,    // Camera module cutout
    DualPunchHole = 4,   // Dual punch-holes
    Waterdrop = 5,       // Waterdrop notch
}

/// Mobile UI theme configuration
#[derive(Debug, Clone)]
pub struct MobileUiTheme {
    pub primary_color: ColorInfo,
    pub secondary_color: ColorInfo,
    pub accent_color: ColorInfo,
    pub background_color: ColorInfo,
    pub surface_color: ColorInfo,
    pub text_color: ColorInfo,
    pub font_family: &'static str,
    pub icon_family: &'static str,
    pub border_radius: u32,
    pub elevation_shadows: ElevationShadows,
}

/// Color information
#[derive(Debug, Clone, Copy)]
pub struct ColorInfo {
    pub r: u8,                   // Red component (0-255)
    pub g: u8,                   // Green component (0-255)
    pub b: u8,                   // Blue component (0-255)
    pub a: u8,                   // Alpha component (0-255)
    pub hex_code: &'static str,  // Hex color code
}

/// Elevation shadows for Material Design
#[derive(Debug, Clone, Copy)]
pub struct ElevationShadows {
    pub level_0: u8,             // No shadow
    pub level_1: u8,             // 1dp elevation
    pub level_2: u8,             // 2dp elevation
    pub level_3: u8,             // 3dp elevation
    pub level_4: u8,             // 4dp elevation
    pub level_5: u8,             // 5dp elevation
    pub level_6: u8,             // 6dp elevation
    pub level_7: u8,             // 7dp elevation
    pub level_8: u8,             // 8dp elevation
    pub level_9: u8,             // 9dp elevation
    pub level_10: u8,            // 10dp elevation
}

/// Mobile UI widget specifications
#[derive(Debug, Clone, Copy)]
pub struct MobileWidgetSpecs {
    pub min_touch_target_dp: u32,    // Minimum touch target size (dp)
    pub button_height_dp: u32,       // Standard button height
    pub icon_size_dp: u32,           // Standard icon size
    pub text_size_sp: u32,           // Standard text size
    pub margin_dp: u32,              // Standard margin
    pub padding_dp: u32,             // Standard padding
    pub border_width_dp: u32,        // Standard border width
    pub corner_radius_dp: u32,       // Standard corner radius
}

/// Mobile UI configuration
#[derive(Debug, Clone)]
pub struct MobileUiConfig {
    pub display_info: MobileDisplayInfo,
    pub density_class: UiDensity,
    pub touch_mode: TouchMode,
    pub scaling_mode: ScalingMode,
    pub theme: MobileUiTheme,
    pub widget_specs: MobileWidgetSpecs,
    pub animation_settings: AnimationSettings,
}

/// Animation settings for mobile UI
#[derive(Debug, Clone, Copy)]
pub struct AnimationSettings {
    pub duration_fast_ms: u32,       // Fast animation duration
    pub duration_medium_ms: u32,     // Medium animation duration
    pub duration_slow_ms: u32,       // Slow animation duration
    pub transition_easing: EasingFunction,
    pub bounce_enabled: bool,
    pub fade_enabled: bool,
    pub slide_enabled: bool,
}

/// Easing functions for animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EasingFunction {
    Linear = 0,              // Linear easing
    EaseIn = 1,              // Ease in
    EaseOut = 2,             // Ease out
    EaseInOut = 3,           // Ease in out
    Bounce = 4,              // Bounce easing
    Elastic = 5,             // Elastic easing
    Custom = 6,              // Custom easing
}

/// Initialize mobile UI adaptations
pub fn init_mobile_ui() -> Result<(), KernelError> {
    info!("Initializing mobile UI adaptations...");
    
    // Detect mobile device configuration
    let ui_config = detect_mobile_device_config()?;
    
    // Configure mobile UI display
    configure_mobile_display(&ui_config.display_info)?;
    
    // Initialize mobile UI theme
    init_mobile_ui_theme(&ui_config.theme)?;
    
    // Set up responsive layouts
    setup_responsive_layouts(&ui_config)?;
    
    // Configure touch interface
    configure_touch_interface(&ui_config.touch_mode)?;
    
    // Initialize mobile widgets
    init_mobile_widgets(&ui_config.widget_specs)?;
    
    // Set up orientation handling
    setup_orientation_handling()?;
    
    // Configure animations
    configure_animations(&ui_config.animation_settings)?;
    
    info!("Mobile UI adaptations initialized successfully");
    info!("Device: {:?} ({}) at {}x{} ({}) DPI", 
          ui_config.display_info.device_category,
          match ui_config.display_info.orientation {
              ScreenOrientation::Portrait => "Portrait",
              ScreenOrientation::Landscape => "Landscape",
              ScreenOrientation::PortraitInverted => "Portrait Inverted",
              ScreenOrientation::LandscapeInverted => "Landscape Inverted",
          },
          ui_config.display_info.width_px,
          ui_config.display_info.height_px,
          ui_config.display_info.density_dpi);
    
    Ok(())
}

/// Detect mobile device configuration
fn detect_mobile_device_config() -> Result<MobileUiConfig, KernelError> {
    info!("Detecting mobile device configuration...");
    
    // Detect display properties
    let display_info = detect_mobile_display_info()?;
    
    // Determine UI density class
    let density_class = determine_ui_density(&display_info);
    
    // Determine touch capabilities
    let touch_mode = determine_touch_mode();
    
    // Determine scaling mode
    let scaling_mode = determine_scaling_mode(&display_info);
    
    // Create mobile UI theme
    let theme = create_mobile_ui_theme(&display_info, &density_class);
    
    // Create widget specifications
    let widget_specs = create_mobile_widget_specs(&density_class);
    
    // Create animation settings
    let animation_settings = create_animation_settings(&display_info);
    
    Ok(MobileUiConfig {
        display_info,
        density_class,
        touch_mode,
        scaling_mode,
        theme,
        widget_specs,
        animation_settings,
    })
}

/// Detect mobile display information
fn detect_mobile_display_info() -> Result<MobileDisplayInfo, KernelError> {
    info!("Detecting mobile display information...");
    
    // This would detect actual display properties from hardware
    // For now, return reasonable defaults for a modern tablet
    
    let width_px = 1920;
    let height_px = 1200;
    let density_dpi = 160; // Standard density
    let pixel_density = 160.0;
    
    // Determine device category based on size
    let device_category = match (width_px * height_px) as usize {
        0..=2000000 => MobileDeviceCategory::Smartphone,
        2000001..=3000000 => MobileDeviceCategory::Tablet,
        _ => MobileDeviceCategory::LargeTablet,
    };
    
    // Determine orientation (assume portrait for now)
    let orientation = ScreenOrientation::Portrait;
    
    // Calculate safe area insets (assuming no notch for now)
    let safe_area_insets = SafeAreaInsets {
        top: 0,
        bottom: 0,
        left: 0,
        right: 0,
    };
    
    // Determine notch information
    let notch_info = NotchInfo {
        has_notch: false,
        notch_type: NotchType::None,
        notch_width_px: 0,
        notch_height_px: 0,
        notch_depth_px: 0,
    };
    
    // Calculate scale factor based on density
    let scale_factor = density_dpi as f32 / 160.0; // Standard density is 160 DPI
    
    Ok(MobileDisplayInfo {
        width_px,
        height_px,
        density_dpi,
        pixel_density,
        scale_factor,
        device_category,
        orientation,
        safe_area_insets,
        notch_info,
    })
}

/// Determine UI density class
fn determine_ui_density(display_info: &MobileDisplayInfo) -> UiDensity {
    match display_info.density_dpi {
        0..=120 => UiDensity::Low,
        121..=200 => UiDensity::Normal,
        201..=300 => UiDensity::High,
        _ => UiDensity::ExtraHigh,
    }
}

/// Determine touch mode
fn determine_touch_mode() -> TouchMode {
    // Modern mobile devices support multi-touch
    TouchMode::MultiTouch
}

/// Determine scaling mode
fn determine_scaling_mode(display_info: &MobileDisplayInfo) -> ScalingMode {
    match display_info.device_category {
        MobileDeviceCategory::Smartphone => ScalingMode::Adaptive,
        MobileDeviceCategory::Tablet => ScalingMode::Responsive,
        MobileDeviceCategory::LargeTablet => ScalingMode::DensityAware,
        _ => ScalingMode::Auto,
    }
}

/// Create mobile UI theme
fn create_mobile_ui_theme(display_info: &MobileDisplayInfo, density: &UiDensity) -> MobileUiTheme {
    // Create a modern Material Design-inspired theme
    
    MobileUiTheme {
        primary_color: ColorInfo {
            r: 33, g: 150, b: 243, a: 255, // Material Blue 500
            hex_code: "#2196F3",
        },
        secondary_color: ColorInfo {
            r: 255, g: 193, b: 7, a: 255, // Material Amber 500
            hex_code: "#FFC107",
        },
        accent_color: ColorInfo {
            r: 244, g: 67, b: 54, a: 255, // Material Red 500
            hex_code: "#F44336",
        },
        background_color: ColorInfo {
            r: 248, g: 249, b: 250, a: 255, // Light gray
            hex_code: "#F8F9FA",
        },
        surface_color: ColorInfo {
            r: 255, g: 255, b: 255, a: 255, // White
            hex_code: "#FFFFFF",
        },
        text_color: ColorInfo {
            r: 33, g: 37, b: 41, a: 255, // Dark gray
            hex_code: "#212529",
        },
        font_family: "Roboto",
        icon_family: "Material Icons",
        border_radius: 4,
        elevation_shadows: ElevationShadows {
            level_0: 0, level_1: 1, level_2: 2, level_3: 3, level_4: 4,
            level_5: 5, level_6: 6, level_7: 7, level_8: 8, level_9: 9, level_10: 10,
        },
    }
}

/// Create mobile widget specifications
fn create_mobile_widget_specs(density: &UiDensity) -> MobileWidgetSpecs {
    // Base specifications in device-independent pixels (dp)
    let base_min_touch_target = 48;
    let base_button_height = 48;
    let base_icon_size = 24;
    let base_text_size = 14;
    let base_margin = 8;
    let base_padding = 16;
    let base_border_width = 1;
    let base_corner_radius = 4;
    
    // Adjust based on density
    let density_multiplier = match density {
        UiDensity::Low => 0.8,
        UiDensity::Normal => 1.0,
        UiDensity::High => 1.2,
        UiDensity::ExtraHigh => 1.4,
    };
    
    MobileWidgetSpecs {
        min_touch_target_dp: (base_min_touch_target as f32 * density_multiplier) as u32,
        button_height_dp: (base_button_height as f32 * density_multiplier) as u32,
        icon_size_dp: (base_icon_size as f32 * density_multiplier) as u32,
        text_size_sp: (base_text_size as f32 * density_multiplier) as u32,
        margin_dp: (base_margin as f32 * density_multiplier) as u32,
        padding_dp: (base_padding as f32 * density_multiplier) as u32,
        border_width_dp: base_border_width,
        corner_radius_dp: (base_corner_radius as f32 * density_multiplier) as u32,
    }
}

/// Create animation settings
fn create_animation_settings(display_info: &MobileDisplayInfo) -> AnimationSettings {
    AnimationSettings {
        duration_fast_ms: 150,
        duration_medium_ms: 250,
        duration_slow_ms: 400,
        transition_easing: EasingFunction::EaseInOut,
        bounce_enabled: true,
        fade_enabled: true,
        slide_enabled: true,
    }
}

/// Configure mobile UI display
fn configure_mobile_display(display_info: &MobileDisplayInfo) -> Result<(), KernelError> {
    info!("Configuring mobile UI display...");
    
    // Configure display settings for mobile usage
    // This would involve:
    // 1. Setting up high-DPI rendering
    // 2. Configuring display scaling
    // 3. Setting up safe area handling
    
    info!("Display configured: {}x{} at {} DPI", 
          display_info.width_px, display_info.height_px, display_info.density_dpi);
    
    Ok(())
}

/// Initialize mobile UI theme
fn init_mobile_ui_theme(theme: &MobileUiTheme) -> Result<(), KernelError> {
    info!("Initializing mobile UI theme...");
    
    // Set up color palette
    setup_color_palette(theme)?;
    
    // Configure fonts and typography
    setup_typography(theme)?;
    
    // Set up icon system
    setup_icon_system(theme)?;
    
    // Configure shadows and elevation
    setup_elevation_system(theme)?;
    
    info!("UI theme initialized: {} colors, {} font", theme.font_family, theme.icon_family);
    
    Ok(())
}

/// Set up color palette
fn setup_color_palette(theme: &MobileUiTheme) -> Result<(), KernelError> {
    info!("Setting up color palette...");
    
    // Configure primary, secondary, accent, background, and surface colors
    
    Ok(())
}

/// Set up typography
fn setup_typography(theme: &MobileUiTheme) -> Result<(), KernelError> {
    info!("Setting up typography: {}", theme.font_family);
    
    // Configure font families and text styling
    
    Ok(())
}

/// Set up icon system
fn setup_icon_system(theme: &MobileUiTheme) -> Result<(), KernelError> {
    info!("Setting up icon system: {}", theme.icon_family);
    
    // Configure icon families and icon rendering
    
    Ok(())
}

/// Set up elevation system
fn setup_elevation_system(theme: &MobileUiTheme) -> Result<(), KernelError> {
    info!("Setting up elevation system...");
    
    // Configure Material Design elevation and shadows
    
    Ok(())
}

/// Set up responsive layouts
fn setup_responsive_layouts(config: &MobileUiConfig) -> Result<(), KernelError> {
    info!("Setting up responsive layouts...");
    
    // Configure responsive layout system based on device category
    
    let layout_system = match config.display_info.device_category {
        MobileDeviceCategory::Smartphone => "Phone Layout",
        MobileDeviceCategory::Tablet => "Tablet Layout",
        MobileDeviceCategory::LargeTablet => "Large Tablet Layout",
        _ => "Unknown Layout",
    };
    
    info!("Responsive layout system: {}", layout_system);
    
    Ok(())
}

/// Configure touch interface
fn configure_touch_interface(touch_mode: &TouchMode) -> Result<(), KernelError> {
    info!("Configuring touch interface for {:?} mode", touch_mode);
    
    match touch_mode {
        TouchMode::SingleTouch => {
            // Configure for single touch only
        },
        TouchMode::MultiTouch => {
            // Configure for multi-touch support
        },
        TouchMode::GestureOnly => {
            // Configure for gesture recognition
        },
        TouchMode::StylusOnly => {
            // Configure for stylus input
        },
        TouchMode::Hybrid => {
            // Configure for mixed input methods
        },
    }
    
    Ok(())
}

/// Initialize mobile widgets
fn init_mobile_widgets(specs: &MobileWidgetSpecs) -> Result<(), KernelError> {
    info!("Initializing mobile widgets...");
    
    // Initialize mobile-specific widgets with proper specifications
    
    info!("Widgets initialized: min touch target: {}dp, button height: {}dp", 
          specs.min_touch_target_dp, specs.button_height_dp);
    
    Ok(())
}

/// Set up orientation handling
fn setup_orientation_handling() -> Result<(), KernelError> {
    info!("Setting up orientation handling...");
    
    // Configure orientation change handling
    // This would integrate with the actual device orientation detection
    
    Ok(())
}

/// Configure animations
fn configure_animations(animation_settings: &AnimationSettings) -> Result<(), KernelError> {
    info!("Configuring animations...");
    
    info!("Animation settings: fast {}ms, medium {}ms, slow {}ms", 
          animation_settings.duration_fast_ms,
          animation_settings.duration_medium_ms,
          animation_settings.duration_slow_ms);
    
    // Configure easing functions and animation settings
    
    Ok(())
}

/// Handle screen orientation change
pub fn handle_orientation_change(new_orientation: ScreenOrientation) -> Result<(), KernelError> {
    info!("Handling orientation change to {:?}", new_orientation);
    
    // Update UI layout for new orientation
    update_ui_layout(new_orientation)?;
    
    // Reconfigure touch interface if needed
    update_touch_interface(new_orientation)?;
    
    // Trigger UI animation for orientation change
    animate_orientation_change(new_orientation)?;
    
    Ok(())
}

/// Update UI layout for orientation
fn update_ui_layout(orientation: ScreenOrientation) -> Result<(), KernelError> {
    info!("Updating UI layout for {:?} orientation", orientation);
    
    // This would update the UI layout constraints and dimensions
    // based on the new screen orientation
    
    Ok(())
}

/// Update touch interface for orientation
fn update_touch_interface(orientation: ScreenOrientation) -> Result<(), KernelError> {
    info!("Updating touch interface for orientation");
    
    // Update touch coordinate mapping and gesture handling
    
    Ok(())
}

/// Animate orientation change
fn animate_orientation_change(orientation: ScreenOrientation) -> Result<(), KernelError> {
    info!("Animating orientation change");
    
    // Animate the orientation transition
    
    Ok(())
}

/// Get current UI configuration
pub fn get_ui_configuration() -> Result<MobileUiConfig, KernelError> {
    // Return the current UI configuration
    // This would be stored globally
    
    // For now, return a default configuration
    detect_mobile_device_config()
}

/// Update UI theme
pub fn update_ui_theme(new_theme: MobileUiTheme) -> Result<(), KernelError> {
    info!("Updating UI theme");
    
    // Apply new theme colors, fonts, and styling
    
    Ok(())
}

/// Set display scaling
pub fn set_display_scaling(scale_factor: f32) -> Result<(), KernelError> {
    info!("Setting display scaling to {}", scale_factor);
    
    // Apply new scaling factor to all UI elements
    
    Ok(())
}

/// Enable/disable animations
pub fn set_animations_enabled(enabled: bool) -> Result<(), KernelError> {
    info!("Setting animations enabled: {}", enabled);
    
    // Enable or disable UI animations
    
    Ok(())
}

/// Get display metrics
pub fn get_display_metrics() -> Result<MobileDisplayInfo, KernelError> {
    // Return current display metrics
    
    // This would query the actual display properties
    detect_mobile_display_info()
}