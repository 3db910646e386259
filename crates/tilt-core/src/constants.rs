// Reference tuning for the two layers and the shared smoothing filter.

// Character (foreground) layer
pub const CHARACTER_MAX_BETA_ROTATION: f64 = 18.0; // front/back tilt bound, degrees
pub const CHARACTER_MAX_GAMMA_ROTATION: f64 = 18.0; // left/right tilt bound, degrees
pub const CHARACTER_MOVE_RATIO: f64 = 12.0; // full-range translation, px

// Background layer
pub const BACKGROUND_MAX_BETA_ROTATION: f64 = 12.0;
pub const BACKGROUND_MAX_GAMMA_ROTATION: f64 = 12.0;
pub const BACKGROUND_MOVE_RATIO: f64 = 10.0; // full-range panning, %

// Exponential smoothing weight applied to both axes
pub const SMOOTH_FACTOR: f64 = 0.05;

// Background panning is centred on this percentage
pub const BACKGROUND_CENTER_PERCENT: f64 = 50.0;

// Samples are rounded to this many decimals before entering the pipeline
pub const SAMPLE_DECIMALS: i32 = 2;
