/// Navigation, observer and parallax tuning constants.
///
/// These keep timings and geometry in one place so the pure state machines
/// and the DOM wiring agree on them.
// Wheel gestures closer together than this are dropped (milliseconds)
pub const WHEEL_DEBOUNCE_MS: u64 = 50;
// Cooldown after a triggered section transition (milliseconds)
pub const SECTION_SETTLE_MS: u64 = 800;
// Delay before the project detail record is released after closing
pub const MODAL_CLOSE_DELAY_MS: u64 = 300;
// Loading overlay fade-out delay after mount
pub const LOADING_OVERLAY_MS: u64 = 300;
// Added to settle timers so they never fire before the window closes
pub const TIMER_SLACK_MS: u64 = 5;

// Visibility tracking
pub const VISIBILITY_THRESHOLD: f64 = 0.5;
pub const VIEWPORT_MARGIN_FRAC: f64 = 0.10; // shrinks the viewport top and bottom
pub const OBSERVER_ROOT_MARGIN: &str = "-10% 0px -10% 0px";

// Navbar chrome
pub const NAV_SCROLLED_OFFSET_PX: f64 = 50.0;

// Pointer parallax (hero)
pub const HERO_GRADIENT_AMPLITUDE: f32 = 150.0;
pub const HERO_GRADIENT_BASE_SPEED: f32 = 0.02;
pub const HERO_GRADIENT_SPEED_STEP: f32 = 0.01;
pub const HERO_GRADIENT_ROTATION_DEG: f32 = 5.0;
pub const HERO_FLOAT_AMPLITUDE: f32 = 30.0;
pub const HERO_FLOAT_MULTIPLIER_STEP: f32 = 0.1;

// Scroll parallax
pub const DEFAULT_PARALLAX_SPEED: f32 = 0.5;
pub const SECTION_DRIFT: [f32; 5] = [0.1, 0.05, 0.03, 0.07, 0.04];

// Skill meter
pub const SKILL_LEVEL_MAX: u8 = 5;

pub const DOCUMENT_TITLE: &str = "Amboru Koushik - Portfolio";
