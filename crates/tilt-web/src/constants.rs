// Element ids the page is expected to provide.

pub const BACKGROUND_ID: &str = "tilt-background"; // carries the background image and data-* tuning
pub const CHARACTER_ID: &str = "tilt-character"; // foreground image
pub const ENABLE_BUTTON_ID: &str = "tilt-enable";

// Live readout spans
pub const READOUT_ALPHA_ID: &str = "tilt-alpha";
pub const READOUT_BETA_ID: &str = "tilt-beta";
pub const READOUT_GAMMA_ID: &str = "tilt-gamma";

pub const ORIENTATION_EVENT: &str = "deviceorientation";
