pub mod partition;
pub mod palette;

/// Largest angle between consecutive tessellated arc points, in radians.
pub const ARC_STEP: f32 = 0.02;
