//! Layer and controller configuration.
//!
//! Everything is validated on construction so the per-sample path never has
//! to deal with a zero rotation bound or an invalid smoothing factor.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("max {axis} rotation must be a finite angle > 0 (got {value})")]
    MaxRotation { axis: Axis, value: f64 },
    #[error("move ratio must be finite and >= 0 (got {0})")]
    MoveRatio(f64),
    #[error("smoothing factor must be in (0, 1] (got {0})")]
    SmoothFactor(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Beta,
    Gamma,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Axis::Beta => "beta",
            Axis::Gamma => "gamma",
        })
    }
}

/// Rotation bounds and travel of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerConfig {
    max_beta_rotation: f64,
    max_gamma_rotation: f64,
    move_ratio: f64,
}

impl LayerConfig {
    pub fn new(
        max_beta_rotation: f64,
        max_gamma_rotation: f64,
        move_ratio: f64,
    ) -> Result<Self, ConfigError> {
        check_rotation(Axis::Beta, max_beta_rotation)?;
        check_rotation(Axis::Gamma, max_gamma_rotation)?;
        if !(move_ratio.is_finite() && move_ratio >= 0.0) {
            return Err(ConfigError::MoveRatio(move_ratio));
        }
        Ok(Self {
            max_beta_rotation,
            max_gamma_rotation,
            move_ratio,
        })
    }

    /// Foreground defaults: 18 degrees each way, 12 px of travel.
    pub const fn character() -> Self {
        Self {
            max_beta_rotation: CHARACTER_MAX_BETA_ROTATION,
            max_gamma_rotation: CHARACTER_MAX_GAMMA_ROTATION,
            move_ratio: CHARACTER_MOVE_RATIO,
        }
    }

    /// Background defaults: 12 degrees each way, 10 % of panning.
    pub const fn background() -> Self {
        Self {
            max_beta_rotation: BACKGROUND_MAX_BETA_ROTATION,
            max_gamma_rotation: BACKGROUND_MAX_GAMMA_ROTATION,
            move_ratio: BACKGROUND_MOVE_RATIO,
        }
    }

    pub fn max_beta_rotation(&self) -> f64 {
        self.max_beta_rotation
    }

    pub fn max_gamma_rotation(&self) -> f64 {
        self.max_gamma_rotation
    }

    pub fn move_ratio(&self) -> f64 {
        self.move_ratio
    }

    pub fn max_rotation(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Beta => self.max_beta_rotation,
            Axis::Gamma => self.max_gamma_rotation,
        }
    }

    /// Copy with the given fields replaced, re-validated.
    pub fn with_overrides(
        &self,
        max_beta_rotation: Option<f64>,
        max_gamma_rotation: Option<f64>,
        move_ratio: Option<f64>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            max_beta_rotation.unwrap_or(self.max_beta_rotation),
            max_gamma_rotation.unwrap_or(self.max_gamma_rotation),
            move_ratio.unwrap_or(self.move_ratio),
        )
    }
}

fn check_rotation(axis: Axis, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::MaxRotation { axis, value })
    }
}

/// Which angle drives the rotation transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationInput {
    /// The shared smoothed beta/gamma.
    #[default]
    Smoothed,
    /// The unfiltered sample; rotation follows the sensor immediately while
    /// translation still eases.
    Raw,
}

/// Whether the smoothed angle is clamped before it is mapped to an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionInput {
    /// Map the smoothed angle as-is; offsets may leave `[0, move_ratio]`.
    #[default]
    Unclamped,
    /// Clamp to the layer bounds first so offsets stay in `[0, move_ratio]`.
    Clamped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectPolicy {
    pub rotation_input: RotationInput,
    pub position_input: PositionInput,
}

/// Everything a [`GyroController`](crate::GyroController) is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub character: LayerConfig,
    pub background: LayerConfig,
    pub smooth_factor: f64,
    pub policy: EffectPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            character: LayerConfig::character(),
            background: LayerConfig::background(),
            smooth_factor: SMOOTH_FACTOR,
            policy: EffectPolicy::default(),
        }
    }
}

impl ControllerConfig {
    /// Layer configs are valid by construction; only the factor needs checking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smooth_factor > 0.0 && self.smooth_factor <= 1.0 {
            Ok(())
        } else {
            Err(ConfigError::SmoothFactor(self.smooth_factor))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let c = ControllerConfig::default();
        assert_eq!(c.character, LayerConfig::new(18.0, 18.0, 12.0).unwrap());
        assert_eq!(c.background, LayerConfig::new(12.0, 12.0, 10.0).unwrap());
        assert_eq!(c.smooth_factor, 0.05);
        assert_eq!(c.policy.rotation_input, RotationInput::Smoothed);
        assert_eq!(c.policy.position_input, PositionInput::Unclamped);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_bounds() {
        assert_eq!(
            LayerConfig::new(0.0, 10.0, 1.0),
            Err(ConfigError::MaxRotation {
                axis: Axis::Beta,
                value: 0.0
            })
        );
        assert_eq!(
            LayerConfig::new(10.0, -3.0, 1.0),
            Err(ConfigError::MaxRotation {
                axis: Axis::Gamma,
                value: -3.0
            })
        );
        assert!(LayerConfig::new(f64::INFINITY, 10.0, 1.0).is_err());
    }

    #[test]
    fn move_ratio_may_be_zero_but_not_negative() {
        assert!(LayerConfig::new(10.0, 10.0, 0.0).is_ok());
        assert_eq!(
            LayerConfig::new(10.0, 10.0, -1.0),
            Err(ConfigError::MoveRatio(-1.0))
        );
    }

    #[test]
    fn overrides_are_revalidated() {
        let base = LayerConfig::character();
        let moved = base.with_overrides(None, Some(30.0), None).unwrap();
        assert_eq!(moved.max_beta_rotation(), 18.0);
        assert_eq!(moved.max_gamma_rotation(), 30.0);
        assert!(base.with_overrides(Some(0.0), None, None).is_err());
    }

    #[test]
    fn error_messages_name_the_axis() {
        let err = LayerConfig::new(10.0, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "max gamma rotation must be a finite angle > 0 (got 0)"
        );
    }
}
