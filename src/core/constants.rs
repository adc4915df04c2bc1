/// Interaction tuning constants.
///
/// Timings are in milliseconds unless the name says otherwise; audio times are
/// seconds relative to the audio clock at the moment the chime starts.
// Name validation
pub const NAME_MIN_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 20;
pub const NAME_ERROR_MESSAGE: &str = "Please enter your first name (5 letters).";

// Evasive control
pub const EVADE_EDGE_MARGIN_PX: f32 = 6.0; // keep clear of the container's right/bottom edge
pub const EVADE_PULSE_TRANSFORM: &str = "scale(1.05) rotate(-6deg)";
pub const EVADE_PULSE_RESET_MS: i32 = 220;

// Initial layout of the two choice buttons (fractions of the container width)
pub const INITIAL_TOP_MIN_PX: f32 = 6.0;
pub const INITIAL_LEFT_MIN_PX: f32 = 10.0;
pub const CONFIRM_LEFT_FRACTION: f32 = 0.20;
pub const EVASIVE_LEFT_FRACTION: f32 = 0.62;

// Particles
pub const CONFIRM_PARTICLE_COUNT: usize = 12;
pub const REPLAY_PARTICLE_COUNT: usize = 10;
pub const PARTICLE_LIFETIME_MS: i32 = 1600;
pub const PARTICLE_STAGGER_MS: i32 = 40; // per-index offset so removals don't land together
pub const PARTICLE_X_SPAN: (f32, f32) = (0.1, 0.9); // fraction of viewport width
pub const PARTICLE_Y_SPAN: (f32, f32) = (0.3, 0.8); // fraction of viewport height
pub const PARTICLE_SCALE_SPAN: (f32, f32) = (0.85, 1.25);
pub const PARTICLE_ROTATION_DEG: f32 = 20.0; // symmetric around zero

// Chime
pub const CHIME_FREQUENCY_HZ: f32 = 560.0;
pub const CHIME_PEAK_GAIN: f32 = 0.11;
pub const CHIME_ATTACK_SEC: f64 = 0.02;
pub const CHIME_DECAY_END_SEC: f64 = 0.5;
pub const CHIME_FLOOR_GAIN: f32 = 0.0001; // exponential ramps can't reach zero
pub const CHIME_STOP_SEC: f64 = 0.6;
