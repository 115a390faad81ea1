use serde::{Deserialize, Serialize};

use crate::models::plan::Weekday;

/// Human-readable justification attached to every patch. A patch with no
/// reason is invalid output, so patches are only constructed through
/// [`TrainingPatch::with_reason`] / the nutrition rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchReason {
    /// One user-facing sentence.
    pub summary: String,
    /// Short justification bullets, in display order.
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSwap {
    pub day: Weekday,
    pub from_exercise: String,
    pub to_exercise: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeTweak {
    pub day: Weekday,
    pub exercise: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_sets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_reps: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityTweak {
    pub day: Weekday,
    pub exercise: String,
    pub rpe: String,
}

/// A described, not-yet-applied change to a training week. Applying it to
/// the stored plan is the caller's job; the engine only computes what the
/// change should be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_per_week: Option<u8>,
    pub swaps: Vec<ExerciseSwap>,
    pub volume_tweaks: Vec<VolumeTweak>,
    pub intensity_tweaks: Vec<IntensityTweak>,
    pub deload: bool,
    pub reason: PatchReason,
}

impl TrainingPatch {
    pub fn with_reason(reason: PatchReason) -> Self {
        Self {
            days_per_week: None,
            swaps: Vec::new(),
            volume_tweaks: Vec::new(),
            intensity_tweaks: Vec::new(),
            deload: false,
            reason,
        }
    }
}

/// Nutrition-only counterpart of [`TrainingPatch`]. Same contract:
/// describes a change, never mutates stored state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kcal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_grams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_grams: Option<u32>,
    pub reason: PatchReason,
}
