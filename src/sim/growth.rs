//! Growth and scoring rules
//!
//! The player's scale is a pure function of how many fish it has eaten, so
//! re-applying growth for the same count never compounds.

use crate::tuning::GrowthTier;

/// Scale unlocked by `eaten`: the highest milestone reached, or 1.0
pub fn scale_for(eaten: u32, table: &[GrowthTier]) -> f32 {
    table
        .iter()
        .rev()
        .find(|tier| tier.eaten <= eaten)
        .map_or(1.0, |tier| tier.scale)
}

/// True when `eaten` lands exactly on a milestone
pub fn is_milestone(eaten: u32, table: &[GrowthTier]) -> bool {
    table.iter().any(|tier| tier.eaten == eaten)
}

/// Base sprite size scaled and truncated to whole pixels
pub fn scaled_size(base: (u32, u32), scale: f32) -> (u32, u32) {
    (
        (base.0 as f32 * scale) as u32,
        (base.1 as f32 * scale) as u32,
    )
}

/// Points an enemy of the given size is worth
pub fn enemy_score(size: f32, base_score: f32) -> u64 {
    (size * base_score).round() as u64
}
