// Pure angle helpers: symmetric rotation bound and angle-to-offset mapping.
// Both assume `max_rotation > 0`, which `LayerConfig` guarantees.

/// Bound `degrees` to `[-max_rotation, max_rotation]`.
#[inline]
pub fn clamp_rotation(degrees: f64, max_rotation: f64) -> f64 {
    degrees.max(-max_rotation).min(max_rotation)
}

/// Rescale an angle from `[-max_rotation, max_rotation]` to `[0, move_ratio]`.
///
/// The angle is not clamped here; inputs beyond the bound map outside the
/// target range.
#[inline]
pub fn map_position(angle: f64, max_rotation: f64, move_ratio: f64) -> f64 {
    ((angle + max_rotation) / (max_rotation * 2.0)) * move_ratio
}
