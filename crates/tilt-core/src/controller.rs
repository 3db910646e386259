//! Turns orientation samples into per-layer transforms.

use crate::config::{
    Axis, ConfigError, ControllerConfig, EffectPolicy, LayerConfig, PositionInput, RotationInput,
};
use crate::constants::BACKGROUND_CENTER_PERCENT;
use crate::mapping::{clamp_rotation, map_position};
use crate::sample::OrientationSample;
use crate::smoother::{AxisSmoothers, SmoothedTilt};
use crate::surface::Surface;
use crate::transform::{BackgroundTransform, CharacterTransform, FrameTransforms, Rotation};
use glam::DVec2;

/// Drives the character and background layers from one shared pair of
/// smoothers.
///
/// Both layers always read the same smoothed beta/gamma; only their rotation
/// bounds and move ratios differ.
#[derive(Clone, Debug)]
pub struct GyroController {
    character: LayerConfig,
    background: LayerConfig,
    policy: EffectPolicy,
    smoothers: AxisSmoothers,
}

impl GyroController {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            character: config.character,
            background: config.background,
            policy: config.policy,
            smoothers: AxisSmoothers::new(config.smooth_factor)?,
        })
    }

    /// Controller with the default smoothing factor and policy.
    pub fn with_layers(character: LayerConfig, background: LayerConfig) -> Self {
        Self {
            character,
            background,
            policy: EffectPolicy::default(),
            smoothers: AxisSmoothers::default(),
        }
    }

    pub fn character(&self) -> &LayerConfig {
        &self.character
    }

    pub fn background(&self) -> &LayerConfig {
        &self.background
    }

    pub fn policy(&self) -> EffectPolicy {
        self.policy
    }

    /// Current filter estimate, `None` before the first sample.
    pub fn smoothed(&self) -> Option<SmoothedTilt> {
        self.smoothers.current()
    }

    /// Advance the shared smoothers by one sample and compute both layers.
    pub fn compute(&mut self, sample: &OrientationSample) -> FrameTransforms {
        let raw = SmoothedTilt {
            beta: sample.beta,
            gamma: sample.gamma,
        };
        let smoothed = self.smoothers.step(sample.beta, sample.gamma);
        FrameTransforms {
            background: self.background_transform(raw, smoothed),
            character: self.character_transform(raw, smoothed),
        }
    }

    /// Process one sample onto both surfaces, background first.
    ///
    /// Nothing happens, and the filters are left untouched, while either
    /// surface is missing; the next sample simply tries again.
    pub fn update<S: Surface + ?Sized>(
        &mut self,
        background: Option<&mut S>,
        sample: &OrientationSample,
        character: Option<&mut S>,
    ) -> Option<FrameTransforms> {
        let (Some(background), Some(character)) = (background, character) else {
            log::trace!("tilt surface missing, sample skipped");
            return None;
        };
        let frame = self.compute(sample);
        write_background(background, &frame.background);
        write_character(character, &frame.character);
        log::trace!(
            "tilt {} -> bg [{} @ {}] char [{}]",
            sample,
            frame.background.transform_css(),
            frame.background.background_position_css(),
            frame.character
        );
        Some(frame)
    }

    /// Apply the background layer on its own. Advances the shared smoothers
    /// by one step.
    pub fn apply_background_effects<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        beta: f64,
        gamma: f64,
    ) -> BackgroundTransform {
        let smoothed = self.smoothers.step(beta, gamma);
        let t = self.background_transform(SmoothedTilt { beta, gamma }, smoothed);
        write_background(surface, &t);
        t
    }

    /// Apply the character layer on its own. Advances the shared smoothers
    /// by one step.
    pub fn apply_character_effects<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        beta: f64,
        gamma: f64,
    ) -> CharacterTransform {
        let smoothed = self.smoothers.step(beta, gamma);
        let t = self.character_transform(SmoothedTilt { beta, gamma }, smoothed);
        write_character(surface, &t);
        t
    }

    // Background pans opposite to the mapped offset, around the centre.
    fn background_transform(
        &self,
        raw: SmoothedTilt,
        smoothed: SmoothedTilt,
    ) -> BackgroundTransform {
        let layer = &self.background;
        BackgroundTransform {
            rotation: self.rotation(layer, raw, smoothed),
            position_percent: DVec2::splat(BACKGROUND_CENTER_PERCENT)
                - self.offset(layer, smoothed),
        }
    }

    fn character_transform(
        &self,
        raw: SmoothedTilt,
        smoothed: SmoothedTilt,
    ) -> CharacterTransform {
        let layer = &self.character;
        CharacterTransform {
            rotation: self.rotation(layer, raw, smoothed),
            translation_px: self.offset(layer, smoothed),
        }
    }

    fn rotation(
        &self,
        layer: &LayerConfig,
        raw: SmoothedTilt,
        smoothed: SmoothedTilt,
    ) -> Rotation {
        let tilt = match self.policy.rotation_input {
            RotationInput::Smoothed => smoothed,
            RotationInput::Raw => raw,
        };
        Rotation {
            x_deg: clamp_rotation(tilt.beta, layer.max_rotation(Axis::Beta)),
            y_deg: clamp_rotation(tilt.gamma, layer.max_rotation(Axis::Gamma)),
        }
    }

    // x follows gamma (left/right), y follows beta (front/back)
    fn offset(&self, layer: &LayerConfig, smoothed: SmoothedTilt) -> DVec2 {
        let max_beta = layer.max_rotation(Axis::Beta);
        let max_gamma = layer.max_rotation(Axis::Gamma);
        let (beta, gamma) = match self.policy.position_input {
            PositionInput::Unclamped => (smoothed.beta, smoothed.gamma),
            PositionInput::Clamped => (
                clamp_rotation(smoothed.beta, max_beta),
                clamp_rotation(smoothed.gamma, max_gamma),
            ),
        };
        DVec2::new(
            map_position(gamma, max_gamma, layer.move_ratio()),
            map_position(beta, max_beta, layer.move_ratio()),
        )
    }
}

fn write_background<S: Surface + ?Sized>(surface: &mut S, t: &BackgroundTransform) {
    surface.set_transform(&t.transform_css());
    surface.set_background_position(&t.background_position_css());
}

fn write_character<S: Surface + ?Sized>(surface: &mut S, t: &CharacterTransform) {
    surface.set_transform(&t.transform_css());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn reference() -> GyroController {
        GyroController::new(ControllerConfig::default()).unwrap()
    }

    #[test]
    fn missing_surface_is_a_no_op() {
        let mut c = reference();
        let mut bg = MemorySurface::default();
        let sample = OrientationSample::new(0.0, 10.0, 5.0);

        assert!(c.update(Some(&mut bg), &sample, None).is_none());
        assert!(c.update(None, &sample, Some(&mut bg)).is_none());
        assert_eq!(bg, MemorySurface::default());
        assert!(c.smoothed().is_none());
    }

    #[test]
    fn update_writes_both_layers_once() {
        let mut c = reference();
        let (mut bg, mut ch) = (MemorySurface::default(), MemorySurface::default());
        c.update(Some(&mut bg), &OrientationSample::new(0.0, 1.0, 2.0), Some(&mut ch));
        assert_eq!(bg.writes, 2);
        assert_eq!(ch.writes, 1);
        assert!(ch.background_position.is_none());
    }

    #[test]
    fn update_advances_smoothers_once_per_sample() {
        let mut c = reference();
        let (mut bg, mut ch) = (MemorySurface::default(), MemorySurface::default());
        c.update(Some(&mut bg), &OrientationSample::new(0.0, 10.0, 5.0), Some(&mut ch));
        c.update(Some(&mut bg), &OrientationSample::new(0.0, 20.0, 5.0), Some(&mut ch));
        let s = c.smoothed().unwrap();
        assert!((s.beta - 10.5).abs() < 1e-9);
    }

    #[test]
    fn standalone_calls_each_step_the_shared_filter() {
        let mut c = reference();
        let (mut bg, mut ch) = (MemorySurface::default(), MemorySurface::default());

        c.apply_background_effects(&mut bg, 10.0, 0.0);
        assert_eq!(bg.transform.as_deref(), Some("rotateX(10deg) rotateY(0deg)"));
        assert_eq!(bg.background_position.as_deref(), Some("45.0% 40.8%"));

        // second step of the same filter pair: beta eases to 10.5
        c.apply_character_effects(&mut ch, 20.0, 0.0);
        assert_eq!(
            ch.transform.as_deref(),
            Some("rotateX(10.5deg) rotateY(0deg) translateX(6.0px) translateY(9.5px)")
        );
        assert!(ch.background_position.is_none());
        assert!((c.smoothed().unwrap().beta - 10.5).abs() < 1e-9);
    }

    #[test]
    fn raw_rotation_ignores_smoothing() {
        let mut config = ControllerConfig::default();
        config.policy.rotation_input = RotationInput::Raw;
        let mut c = GyroController::new(config).unwrap();
        c.compute(&OrientationSample::new(0.0, 0.0, 0.0));
        let frame = c.compute(&OrientationSample::new(0.0, 40.0, -6.0));
        assert_eq!(frame.character.rotation, Rotation { x_deg: 18.0, y_deg: -6.0 });
        assert_eq!(frame.background.rotation, Rotation { x_deg: 12.0, y_deg: -6.0 });
    }

    #[test]
    fn clamped_position_stays_in_range() {
        let mut config = ControllerConfig::default();
        config.smooth_factor = 1.0;
        let mut unclamped = GyroController::new(config).unwrap();
        config.policy.position_input = PositionInput::Clamped;
        let mut clamped = GyroController::new(config).unwrap();

        let sample = OrientationSample::new(0.0, 36.0, -36.0);
        let loose = unclamped.compute(&sample).character.translation_px;
        let tight = clamped.compute(&sample).character.translation_px;

        assert!((loose.y - 18.0).abs() < 1e-9);
        assert!((loose.x - -6.0).abs() < 1e-9);
        assert!((tight.y - 12.0).abs() < 1e-9);
        assert!(tight.x.abs() < 1e-9);
    }

    #[test]
    fn rejects_invalid_smooth_factor() {
        let config = ControllerConfig {
            smooth_factor: 0.0,
            ..ControllerConfig::default()
        };
        assert_eq!(
            GyroController::new(config).unwrap_err(),
            ConfigError::SmoothFactor(0.0)
        );
    }
}
