//! First-order exponential smoothing of the tilt axes.
//!
//! Orientation sensors jitter by a few tenths of a degree even when the
//! device is held still. Each axis runs through its own [`Smoother`]; the
//! controller owns exactly one pair and feeds both layers from it.

use crate::config::ConfigError;
use crate::constants::SMOOTH_FACTOR;

/// Exponential moving average over a scalar stream.
///
/// Smaller factors smooth harder and track changes more slowly; a factor of
/// `1.0` passes samples through unchanged.
#[derive(Clone, Debug)]
pub struct Smoother {
    smooth_factor: f64,
    last_value: Option<f64>,
}

impl Smoother {
    pub fn new(smooth_factor: f64) -> Result<Self, ConfigError> {
        if !(smooth_factor > 0.0 && smooth_factor <= 1.0) {
            return Err(ConfigError::SmoothFactor(smooth_factor));
        }
        Ok(Self {
            smooth_factor,
            last_value: None,
        })
    }

    pub fn smooth_factor(&self) -> f64 {
        self.smooth_factor
    }

    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    /// Feed one sample and return the filtered estimate.
    ///
    /// The first sample seeds the filter and is returned as-is, so there is
    /// no ramp up from zero.
    pub fn smooth(&mut self, value: f64) -> f64 {
        let next = match self.last_value {
            Some(last) => self.lerp(last, value),
            None => value,
        };
        self.last_value = Some(next);
        next
    }

    #[inline]
    fn lerp(&self, start: f64, end: f64) -> f64 {
        (1.0 - self.smooth_factor) * start + self.smooth_factor * end
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self {
            smooth_factor: SMOOTH_FACTOR,
            last_value: None,
        }
    }
}

/// Smoothed beta/gamma pair produced by one step of [`AxisSmoothers`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothedTilt {
    pub beta: f64,
    pub gamma: f64,
}

/// The single beta/gamma filter pair shared by every layer.
#[derive(Clone, Debug, Default)]
pub struct AxisSmoothers {
    pub beta: Smoother,
    pub gamma: Smoother,
}

impl AxisSmoothers {
    pub fn new(smooth_factor: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            beta: Smoother::new(smooth_factor)?,
            gamma: Smoother::new(smooth_factor)?,
        })
    }

    /// Last estimate of both axes, once each has seen a sample.
    pub fn current(&self) -> Option<SmoothedTilt> {
        Some(SmoothedTilt {
            beta: self.beta.last_value()?,
            gamma: self.gamma.last_value()?,
        })
    }

    pub fn step(&mut self, beta: f64, gamma: f64) -> SmoothedTilt {
        SmoothedTilt {
            beta: self.beta.smooth(beta),
            gamma: self.gamma.smooth(gamma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_passes_through() {
        for v in [-90.0, -0.01, 0.0, 7.25, 180.0] {
            let mut s = Smoother::new(0.05).unwrap();
            assert_eq!(s.smooth(v), v);
            assert_eq!(s.last_value(), Some(v));
        }
    }

    #[test]
    fn second_sample_interpolates() {
        let mut s = Smoother::new(0.25).unwrap();
        s.smooth(4.0);
        let r = s.smooth(8.0);
        assert!((r - 5.0).abs() < 1e-12);
        assert!(r > 4.0 && r < 8.0);
        assert_eq!(s.last_value(), Some(r));
    }

    #[test]
    fn factor_one_is_identity() {
        let mut s = Smoother::new(1.0).unwrap();
        s.smooth(3.0);
        assert_eq!(s.smooth(-12.5), -12.5);
        assert_eq!(s.smooth(40.0), 40.0);
    }

    #[test]
    fn rejects_out_of_range_factors() {
        for f in [0.0, -0.1, 1.01, f64::NAN, f64::INFINITY] {
            assert!(Smoother::new(f).is_err(), "factor {f} accepted");
        }
    }

    #[test]
    fn axis_pair_filters_independently() {
        let mut pair = AxisSmoothers::new(0.5).unwrap();
        let first = pair.step(10.0, -4.0);
        assert_eq!(first, SmoothedTilt { beta: 10.0, gamma: -4.0 });
        let second = pair.step(20.0, -4.0);
        assert!((second.beta - 15.0).abs() < 1e-12);
        assert_eq!(second.gamma, -4.0);
    }
}
