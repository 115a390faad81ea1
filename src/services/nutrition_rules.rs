use crate::models::patch::{NutritionPatch, PatchReason};
use crate::models::profile::{Diet, Goal, NormalizedProfile, Profile};
use crate::services::safety::{MAX_KCAL, MIN_KCAL};

/// Macro targets computed from a normalized profile. Shared by the plan
/// generator's nutrition block and [`nutrition_from_profile`], so the two
/// can never drift apart numerically.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroTargets {
    pub kcal: u32,
    pub protein_grams: u32,
    pub carbs_grams: u32,
    pub fat_grams: u32,
    pub rationale: String,
}

pub fn macro_targets(profile: &NormalizedProfile) -> MacroTargets {
    let kcal_per_kg = match profile.goal {
        Goal::Cut => 28.0,
        Goal::Maintain => 30.0,
        Goal::Gain => 33.0,
    };
    let kcal = (profile.body_weight_kg * kcal_per_kg).round() as i64;
    let kcal = kcal.clamp(i64::from(MIN_KCAL), i64::from(MAX_KCAL)) as u32;

    let vegan = profile.diet == Diet::Vegan;
    let protein_per_kg = if vegan { 2.2 } else { 2.0 };
    let protein_grams = (profile.body_weight_kg * protein_per_kg).round() as u32;

    // Calories left after protein, split 55/45 between carbs and fat.
    let remaining_kcal = (i64::from(kcal) - i64::from(protein_grams) * 4).max(0) as f64;
    let carbs_grams = (remaining_kcal * 0.55 / 4.0).round() as u32;
    let fat_grams = (remaining_kcal * 0.45 / 9.0).round() as u32;

    let rationale = if vegan {
        "Protein set at 2.2 g/kg to offset lower amino density of plant sources; \
         remaining calories split 55/45 between carbs and fat."
            .to_string()
    } else {
        "Protein set at 2.0 g/kg; remaining calories split 55/45 between carbs and fat."
            .to_string()
    };

    MacroTargets {
        kcal,
        protein_grams,
        carbs_grams,
        fat_grams,
        rationale,
    }
}

/// Standalone nutrition adjustment for when only the targets, not the full
/// plan, need to change. Same formula as the generator's nutrition block.
pub fn nutrition_from_profile(profile: &Profile) -> NutritionPatch {
    let normalized = profile.normalize();
    let targets = macro_targets(&normalized);

    NutritionPatch {
        kcal: Some(targets.kcal),
        protein_grams: Some(targets.protein_grams),
        carbs_grams: Some(targets.carbs_grams),
        fat_grams: Some(targets.fat_grams),
        reason: PatchReason {
            summary: format!(
                "Target {} kcal per day for a {} goal.",
                targets.kcal,
                normalized.goal.as_str()
            ),
            bullets: vec![
                targets.rationale.clone(),
                format!(
                    "{} g protein, {} g carbs, {} g fat.",
                    targets.protein_grams, targets.carbs_grams, targets.fat_grams
                ),
            ],
        },
    }
}
