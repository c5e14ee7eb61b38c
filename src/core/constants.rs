// Shared scene/tuning constants used by the core state machines and the
// web frontend.

// Device classification breakpoints (CSS pixels)
pub const MOBILE_MAX_WIDTH: f32 = 768.0;
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

// Scene scale factor per device class
pub const MOBILE_SCALE: f32 = 0.6;
pub const TABLET_SCALE: f32 = 0.8;
pub const DESKTOP_SCALE: f32 = 1.0;

// Camera distances per device class, indexed mobile/tablet/desktop
pub const INTRO_CAMERA_Z: [f32; 3] = [14.0, 12.0, 10.0];
pub const SIDEBAR_CAMERA_Z: [f32; 3] = [7.0, 6.0, 5.0];
pub const FOV_MOBILE_DEG: f32 = 70.0;
pub const FOV_DEG: f32 = 50.0;

// Background particle field
pub const PARTICLE_COUNT: usize = 20; // halved on mobile
pub const PARTICLE_X_HALF_RANGE: f32 = 20.0;
pub const PARTICLE_Y_HALF_RANGE: f32 = 10.0;
pub const PARTICLE_Z_MIN: f32 = -30.0;
pub const PARTICLE_Z_MAX: f32 = -5.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.1;
pub const PARTICLE_SPEED_MAX: f32 = 0.3;
pub const PARTICLE_SIZE_MIN: f32 = 0.1;
pub const PARTICLE_SIZE_MAX: f32 = 0.3;
pub const PARTICLE_DRIFT_PER_FRAME: f32 = 0.1; // z += speed * this
pub const PARTICLE_SPIN_PER_FRAME: f32 = 0.01;
pub const PARTICLE_RECYCLE_Z: f32 = 10.0; // recycled once past this plane

// Frame-coupled smoothing factor for menu visuals, sidebar slide and the
// camera rig. Applied once per rendered frame, NOT per elapsed second.
pub const VISUAL_LERP_PER_FRAME: f32 = 0.1;

// Menu item visual targets
pub const MENU_SCALE_ACTIVE: f32 = 1.1;
pub const MENU_SCALE_HOVER: f32 = 1.08;
pub const MENU_SCALE_IDLE: f32 = 1.0;
pub const MENU_GLOW_ACTIVE: f32 = 0.6;
pub const MENU_GLOW_HOVER: f32 = 0.4;
pub const MENU_GLOW_IDLE: f32 = 0.0;

// Menu catalog, one row per entry (about/projects/skills/contact)
pub const MENU_POSITIONS: [[f32; 3]; 4] = [
    [0.0, 1.5, 0.0],
    [0.0, 0.5, 0.0],
    [0.0, -0.5, 0.0],
    [0.0, -1.5, 0.0],
];
pub const MENU_BASE_COLORS: [[f32; 3]; 4] = [
    [0.533, 0.2, 1.0], // violet
    [1.0, 0.2, 0.533], // magenta
    [0.2, 0.667, 1.0], // azure
    [0.2, 1.0, 0.533], // mint
];
pub const MENU_EMISSIVE_COLORS: [[f32; 3]; 4] = [
    [0.133, 0.067, 0.2],
    [0.2, 0.067, 0.133],
    [0.067, 0.133, 0.2],
    [0.067, 0.2, 0.133],
];
pub const MENU_HOVER_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const MENU_HOVER_EMISSIVE: [f32; 3] = [0.0, 0.333, 0.0];
pub const MENU_LABEL_ACTIVE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const MENU_LABEL_HOVER_COLOR: [f32; 3] = [0.8, 1.0, 0.8];

// Sidebar slide targets (menu group x, before scene scale is applied)
pub const SIDEBAR_SLIDE_OPEN_X: f32 = 0.0;
pub const SIDEBAR_SLIDE_CLOSED_X: f32 = -1.8;
pub const SIDEBAR_SLIDE_CLOSED_X_MOBILE: f32 = -2.2;

// Click-to-scroll correction
pub const SCROLL_OFFSET_PX: f32 = -20.0;
pub const SCROLL_DELAY_MS: u32 = 10; // let selection state propagate first

// Section visibility observation
pub const VISIBILITY_THRESHOLD: f32 = 0.2;

// Transition side effects
pub const FLASH_DURATION_MS: u32 = 50;
pub const BREACH_BANNER_CRACK_THRESHOLD: f32 = 0.5;

// Post-processing base parameters
pub const PIXELATION_TRANSITION: f32 = 8.0;
pub const PIXELATION_MOBILE: f32 = 4.0;
pub const PIXELATION_DESKTOP_START: f32 = 6.0;
pub const PIXELATION_DESKTOP_FLOOR: f32 = 2.0;
pub const PIXELATION_DECAY_STEP: f32 = 0.5;
pub const PIXELATION_DECAY_INTERVAL_MS: u64 = 200;
pub const SCANLINE_DENSITY: f32 = 1.5;
pub const SCANLINE_OPACITY: f32 = 0.15;
pub const SCANLINE_OPACITY_MOBILE: f32 = 0.1;
pub const NOISE_OPACITY: f32 = 0.1;
pub const NOISE_OPACITY_MOBILE: f32 = 0.05;
pub const NOISE_OPACITY_TRANSITION: f32 = 0.3;
pub const BLOOM_THRESHOLD: f32 = 0.3;
pub const BLOOM_INTENSITY: f32 = 0.5;
pub const BLOOM_INTENSITY_MOBILE: f32 = 0.3;
pub const BLOOM_INTENSITY_TRANSITION: f32 = 1.2;

// Transition-derived post layers
pub const GLITCH_PRIMARY_GAIN: f32 = 1.5;
pub const GLITCH_SECONDARY_HI: f32 = 2.5;
pub const GLITCH_SECONDARY_LO: f32 = 0.8;
pub const CHROMATIC_CRACK_X: f32 = 0.03;
pub const CHROMATIC_CRACK_Y: f32 = 0.02;
pub const CHROMATIC_JITTER: f32 = 0.01;
pub const CHROMATIC_OPACITY_GAIN: f32 = 1.5;
pub const EXTRA_NOISE_CRACK_THRESHOLD: f32 = 0.6;
pub const EXTRA_BLOOM_CRACK_THRESHOLD: f32 = 0.7;
pub const EXTRA_BLOOM_BASE: f32 = 2.0;
pub const EXTRA_BLOOM_JITTER_SPAN: f32 = 3.0;
pub const EXTRA_BLOOM_THRESHOLD: f32 = 0.2;
pub const JITTER_REFRESH_MS: u64 = 300;
