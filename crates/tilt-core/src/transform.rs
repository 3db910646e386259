//! Per-layer transform values and their CSS serialisation.
//!
//! Rotation and translation are kept as separate components and written out
//! once, rotation first, so nothing ever reads a surface back to append to it.

use glam::DVec2;
use std::fmt;

/// Rotation about the screen X axis (from beta) and Y axis (from gamma), degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotateX({}deg) rotateY({}deg)",
            positive_zero(self.x_deg),
            positive_zero(self.y_deg)
        )
    }
}

/// Foreground layer: rotation composed with a pixel translation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterTransform {
    pub rotation: Rotation,
    pub translation_px: DVec2,
}

impl CharacterTransform {
    pub fn transform_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CharacterTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} translateX({}px) translateY({}px)",
            self.rotation,
            to_fixed_1(self.translation_px.x),
            to_fixed_1(self.translation_px.y)
        )
    }
}

/// Background layer: rotation plus a background-position in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BackgroundTransform {
    pub rotation: Rotation,
    pub position_percent: DVec2,
}

impl BackgroundTransform {
    pub fn transform_css(&self) -> String {
        self.rotation.to_string()
    }

    pub fn background_position_css(&self) -> String {
        format!(
            "{}% {}%",
            to_fixed_1(self.position_percent.x),
            to_fixed_1(self.position_percent.y)
        )
    }
}

/// What one sample produced for both layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTransforms {
    pub background: BackgroundTransform,
    pub character: CharacterTransform,
}

/// One-decimal text with exact halves rounded away from zero.
///
/// `{:.1}` rounds an exact tie to the even digit (`7.25` -> `7.2`). The
/// only f64 values sitting exactly on a one-decimal tie are odd multiples of
/// `0.25`; those are rounded up in magnitude, everything else formats as is.
pub fn to_fixed_1(v: f64) -> String {
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (v * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", v)
    }
}

// `-0` would otherwise print as "-0deg".
#[inline]
fn positive_zero(v: f64) -> f64 {
    v + 0.0
}
