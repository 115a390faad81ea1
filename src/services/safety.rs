//! Numeric safety bounds shared by the generator and the patch rules.

/// Daily calorie targets are clamped into this range no matter what the
/// profile says.
pub const MIN_KCAL: u32 = 1200;
pub const MAX_KCAL: u32 = 5000;

/// Progression may add at most this fraction of current sets...
pub const PROGRESSION_SET_FRACTION: f64 = 0.20;
/// ...and never more than this many sets per call. The smaller bound wins.
pub const PROGRESSION_MAX_SETS_PER_CALL: i32 = 1;

/// Deload removes this fraction of sets (rounded, minimum one set).
pub const DELOAD_SET_FRACTION: f64 = 0.30;
/// Deload never pushes target effort below this RPE.
pub const DELOAD_MIN_RPE: u32 = 5;
