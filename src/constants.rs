/// Frontend wiring and presentation constants.
///
/// Core scene tuning lives in `core::constants`; everything here is
/// specific to the DOM/GPU presentation layer.

// Element ids the frontend expects in the host page
pub const CANVAS_ID: &str = "portfolio-canvas";
pub const INTRO_OVERLAY_ID: &str = "intro-overlay";
pub const INTRO_TITLE_ID: &str = "intro-title";
pub const INTRO_SUBTITLE_ID: &str = "intro-subtitle";
pub const INTRO_INSTRUCTION_ID: &str = "intro-instruction";
pub const GLITCH_OVERLAY_ID: &str = "glitch-overlay";
pub const BREACH_BANNER_ID: &str = "breach-banner";
pub const SIDEBAR_TOGGLE_ID: &str = "sidebar-toggle";

// Body classes the page layout consumes
pub const CLASS_SIDEBAR_MODE: &str = "mode-sidebar";
pub const CLASS_SIDEBAR_OPEN: &str = "sidebar-open";
pub const CLASS_COMPACT: &str = "compact";

// DOM overlay mapping of scene-space bob offsets
pub const OVERLAY_PX_PER_UNIT: f32 = 24.0;

// Picking
pub const PICK_SPHERE_RADIUS: f32 = 0.8; // ray-sphere radius per menu entry

// Scene geometry (world units, before device scale)
pub const BACKDROP_POSITION_Z: f32 = -1.0;
pub const BACKDROP_SCALE: [f32; 2] = [25.0, 15.0];
pub const BACKDROP_COLOR: [f32; 3] = [0.0, 0.067, 0.0];
pub const SIDEBAR_BG_SCALE: [f32; 2] = [2.0, 5.0];
pub const SIDEBAR_BG_COLOR: [f32; 3] = [0.0, 0.035, 0.0];
pub const SIDEBAR_BG_OPACITY: f32 = 0.7;
pub const SIDEBAR_BG_Z: f32 = -0.1;
pub const MENU_BAR_WIDTH: f32 = 1.6;
pub const MENU_BAR_WIDTH_MOBILE: f32 = 1.4;
pub const MENU_BAR_HEIGHT: f32 = 0.4;
pub const MENU_GLOW_SCALE: [f32; 2] = [1.8, 0.4];
pub const MENU_GLOW_Z: f32 = -0.03;
pub const PARTICLE_BOX_SIZE: f32 = 0.3;
pub const PARTICLE_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const PARTICLE_OPACITY: f32 = 0.3;

// Camera frustum
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
