use crate::constants::SAMPLE_DECIMALS;
use std::fmt;

/// One instantaneous device orientation reading, in degrees.
///
/// `beta` is front/back tilt (pitch) and `gamma` is left/right tilt (roll).
/// `alpha` (compass heading) is carried for display only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl OrientationSample {
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Same reading with every angle rounded to two decimals.
    pub fn rounded(self) -> Self {
        Self {
            alpha: round_decimals(self.alpha, SAMPLE_DECIMALS),
            beta: round_decimals(self.beta, SAMPLE_DECIMALS),
            gamma: round_decimals(self.gamma, SAMPLE_DECIMALS),
        }
    }

    /// Builds a rounded sample from nullable sensor fields. Browsers report
    /// `null` angles on hardware without an orientation sensor; such events
    /// carry no tilt and yield `None`. A missing alpha is read as zero.
    pub fn from_sensor(alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) -> Option<Self> {
        let beta = beta.filter(|v| v.is_finite())?;
        let gamma = gamma.filter(|v| v.is_finite())?;
        let alpha = alpha.filter(|v| v.is_finite()).unwrap_or(0.0);
        Some(Self::new(alpha, beta, gamma).rounded())
    }
}

impl fmt::Display for OrientationSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alpha={:.2} beta={:.2} gamma={:.2}",
            self.alpha, self.beta, self.gamma
        )
    }
}

#[inline]
fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
