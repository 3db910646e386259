// Per-page tuning read from data-* attributes on the background element.
// Bad values are logged and the defaults kept; nothing here can fail.

use tilt_core::{ControllerConfig, LayerConfig, PositionInput, RotationInput, Smoother};

pub const SMOOTH_FACTOR_ATTR: &str = "data-smooth-factor";
pub const ROTATION_INPUT_ATTR: &str = "data-rotation-input";
pub const POSITION_INPUT_ATTR: &str = "data-position-input";

pub fn controller_config(attr: impl Fn(&str) -> Option<String>) -> ControllerConfig {
    let mut config = ControllerConfig::default();
    config.character = layer(&attr, "character", config.character);
    config.background = layer(&attr, "background", config.background);

    if let Some(f) = number(&attr, SMOOTH_FACTOR_ATTR) {
        match Smoother::new(f) {
            Ok(_) => config.smooth_factor = f,
            Err(e) => log::warn!("ignoring {SMOOTH_FACTOR_ATTR}: {e}"),
        }
    }
    if let Some(v) = attr(ROTATION_INPUT_ATTR) {
        match v.trim() {
            "smoothed" => config.policy.rotation_input = RotationInput::Smoothed,
            "raw" => config.policy.rotation_input = RotationInput::Raw,
            other => log::warn!("ignoring {ROTATION_INPUT_ATTR}={other:?}"),
        }
    }
    if let Some(v) = attr(POSITION_INPUT_ATTR) {
        match v.trim() {
            "unclamped" => config.policy.position_input = PositionInput::Unclamped,
            "clamped" => config.policy.position_input = PositionInput::Clamped,
            other => log::warn!("ignoring {POSITION_INPUT_ATTR}={other:?}"),
        }
    }
    config
}

fn layer(attr: &impl Fn(&str) -> Option<String>, prefix: &str, base: LayerConfig) -> LayerConfig {
    let max_beta = number(attr, &format!("data-{prefix}-max-beta"));
    let max_gamma = number(attr, &format!("data-{prefix}-max-gamma"));
    let move_ratio = number(attr, &format!("data-{prefix}-move-ratio"));
    match base.with_overrides(max_beta, max_gamma, move_ratio) {
        Ok(layer) => layer,
        Err(e) => {
            log::warn!("ignoring {prefix} layer overrides: {e}");
            base
        }
    }
}

fn number(attr: &impl Fn(&str) -> Option<String>, name: &str) -> Option<f64> {
    let raw = attr(name)?;
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {name}={raw:?}: not a number");
            None
        }
    }
}
