use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::plan::{NutritionSummary, PlanPreview, PreviewDay, PreviewExercise, Weekday};
use crate::models::profile::{
    Diet, ExperienceLevel, Goal, InjuryArea, NormalizedProfile, Profile,
};
use crate::services::nutrition_rules;
use crate::services::substitutions;

/// Produces one deterministic week of training plus nutrition targets from
/// a profile snapshot. All profile fields are optional and defaulted, so
/// this cannot fail; calling it twice with the same logical input yields an
/// identical preview and hash. Persistence is the caller's job.
pub fn generate_deterministic_preview(user_id: &str, profile: &Profile) -> PlanPreview {
    let normalized = profile.normalize();
    let days = build_week(&normalized);

    let targets = nutrition_rules::macro_targets(&normalized);
    let nutrition = NutritionSummary {
        kcal: targets.kcal,
        protein_grams: targets.protein_grams,
        carbs_grams: targets.carbs_grams,
        fat_grams: targets.fat_grams,
        rationale: Some(targets.rationale),
    };

    let content_hash = content_hash(user_id, &normalized, &days, &nutrition);

    PlanPreview {
        user_id: user_id.to_string(),
        days,
        nutrition,
        content_hash,
    }
}

fn build_week(profile: &NormalizedProfile) -> Vec<PreviewDay> {
    Weekday::ALL
        .iter()
        .enumerate()
        .map(|(index, day)| match profile.experience_level {
            ExperienceLevel::Beginner => beginner_day(*day, index, &profile.injuries),
            ExperienceLevel::Intermediate | ExperienceLevel::Advanced => {
                split_day(*day, index, profile)
            }
        })
        .collect()
}

/// Beginner week: Mon/Wed/Fri full-body strength, Tue/Sat zone-2 cardio,
/// the rest is mobility.
fn beginner_day(day: Weekday, index: usize, injuries: &[InjuryArea]) -> PreviewDay {
    match index {
        0 | 2 | 4 => PreviewDay {
            day,
            focus: "Full Body".to_string(),
            exercises: Some(strength_block(ExperienceLevel::Beginner, injuries)),
        },
        1 | 5 => PreviewDay {
            day,
            focus: "Cardio (Zone 2) 25–35min".to_string(),
            exercises: None,
        },
        _ => PreviewDay {
            day,
            focus: "Rest / Mobility 10–15min".to_string(),
            exercises: None,
        },
    }
}

/// Intermediate/advanced week: strength every day, alternating upper/lower.
fn split_day(day: Weekday, index: usize, profile: &NormalizedProfile) -> PreviewDay {
    let focus = if index % 2 == 0 { "Upper" } else { "Lower" };
    PreviewDay {
        day,
        focus: focus.to_string(),
        exercises: Some(strength_block(profile.experience_level, &profile.injuries)),
    }
}

fn strength_block(level: ExperienceLevel, injuries: &[InjuryArea]) -> Vec<PreviewExercise> {
    let mut exercises = vec![
        base_exercise("Back Squat", 3, "8-10", "RPE 7-8"),
        base_exercise("Bench Press", 3, "6-8", "RPE 7-8"),
        base_exercise("Lat Pulldown", 3, "10-12", "RPE 7-8"),
    ];

    match level {
        ExperienceLevel::Beginner => {}
        ExperienceLevel::Intermediate => {
            exercises.push(base_exercise("Romanian Deadlift", 3, "6-8", "RPE 7-8"));
        }
        ExperienceLevel::Advanced => {
            exercises.push(base_exercise("Romanian Deadlift", 4, "5-7", "RPE 8"));
        }
    }

    for exercise in &mut exercises {
        if let Some(rule) = substitutions::substitute_for(&exercise.name, injuries) {
            exercise.name = rule.replacement.to_string();
            exercise.rationale = Some(rule.rationale.to_string());
        }
    }

    exercises
}

fn base_exercise(name: &str, sets: u32, reps: &str, rpe: &str) -> PreviewExercise {
    PreviewExercise {
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        rpe: Some(rpe.to_string()),
        rationale: None,
    }
}

/// Canonical generation inputs, hashed for idempotence checks. Struct field
/// order fixes the key order; injuries arrive sorted from normalization.
#[derive(Serialize)]
struct HashInput<'a> {
    user_id: &'a str,
    experience_level: ExperienceLevel,
    injuries: &'a [InjuryArea],
    goal: Goal,
    diet: Diet,
    body_weight_kg: f64,
    days: &'a [PreviewDay],
    nutrition: &'a NutritionSummary,
}

fn content_hash(
    user_id: &str,
    profile: &NormalizedProfile,
    days: &[PreviewDay],
    nutrition: &NutritionSummary,
) -> String {
    let input = HashInput {
        user_id,
        experience_level: profile.experience_level,
        injuries: &profile.injuries,
        goal: profile.goal,
        diet: profile.diet,
        body_weight_kg: profile.body_weight_kg,
        days,
        nutrition,
    };

    let canonical =
        serde_json::to_string(&input).expect("canonical hash input always serializes");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> Profile {
        Profile {
            goal: Some(Goal::Cut),
            body_weight_kg: Some(80.0),
            experience_level: Some(ExperienceLevel::Beginner),
            diet: Some(Diet::Vegan),
            injuries: Some(vec![InjuryArea::Knee]),
            ..Profile::default()
        }
    }

    #[test]
    fn test_preview_is_deterministic() {
        let first = generate_deterministic_preview("user-1", &full_profile());
        let second = generate_deterministic_preview("user-1", &full_profile());

        assert_eq!(first, second);
        assert_eq!(first.content_hash, second.content_hash);
    }

    #[test]
    fn test_hash_stable_under_injury_order() {
        let mut profile = full_profile();
        profile.injuries = Some(vec![InjuryArea::Knee, InjuryArea::Back]);
        let first = generate_deterministic_preview("user-1", &profile);

        profile.injuries = Some(vec![InjuryArea::Back, InjuryArea::Knee]);
        let second = generate_deterministic_preview("user-1", &profile);

        assert_eq!(first.content_hash, second.content_hash);
    }

    #[test]
    fn test_hash_changes_with_inputs() {
        let first = generate_deterministic_preview("user-1", &full_profile());

        let mut heavier = full_profile();
        heavier.body_weight_kg = Some(81.0);
        let second = generate_deterministic_preview("user-1", &heavier);

        assert_ne!(first.content_hash, second.content_hash);

        let other_user = generate_deterministic_preview("user-2", &full_profile());
        assert_ne!(first.content_hash, other_user.content_hash);
    }

    #[test]
    fn test_week_is_always_seven_days_mon_to_sun() {
        for level in [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ] {
            let profile = Profile {
                experience_level: Some(level),
                ..Profile::default()
            };
            let preview = generate_deterministic_preview("user-1", &profile);

            assert_eq!(preview.days.len(), 7);
            let labels: Vec<_> = preview.days.iter().map(|d| d.day).collect();
            assert_eq!(labels, Weekday::ALL.to_vec());
        }
    }

    #[test]
    fn test_beginner_week_shape() {
        let preview = generate_deterministic_preview("user-1", &Profile::default());

        for (index, day) in preview.days.iter().enumerate() {
            match index {
                0 | 2 | 4 => {
                    assert_eq!(day.focus, "Full Body");
                    assert_eq!(day.exercises.as_ref().unwrap().len(), 3);
                }
                1 | 5 => {
                    assert!(day.focus.starts_with("Cardio"));
                    assert!(day.exercises.is_none());
                }
                _ => {
                    assert!(day.focus.starts_with("Rest"));
                    assert!(day.exercises.is_none());
                }
            }
        }
    }

    #[test]
    fn test_split_week_alternates_upper_lower() {
        let profile = Profile {
            experience_level: Some(ExperienceLevel::Intermediate),
            ..Profile::default()
        };
        let preview = generate_deterministic_preview("user-1", &profile);

        for (index, day) in preview.days.iter().enumerate() {
            let expected = if index % 2 == 0 { "Upper" } else { "Lower" };
            assert_eq!(day.focus, expected);
            assert_eq!(day.exercises.as_ref().unwrap().len(), 4);
        }
    }

    #[test]
    fn test_advanced_gets_heavier_romanian_deadlift() {
        let profile = Profile {
            experience_level: Some(ExperienceLevel::Advanced),
            ..Profile::default()
        };
        let preview = generate_deterministic_preview("user-1", &profile);

        let rdl = preview.days[0]
            .exercises
            .as_ref()
            .unwrap()
            .iter()
            .find(|e| e.name == "Romanian Deadlift")
            .unwrap();

        assert_eq!(rdl.sets, 4);
        assert_eq!(rdl.reps, "5-7");
        assert_eq!(rdl.rpe.as_deref(), Some("RPE 8"));
    }

    #[test]
    fn test_knee_injury_substitutes_squat() {
        let preview = generate_deterministic_preview("user-1", &full_profile());

        let monday = preview.days[0].exercises.as_ref().unwrap();
        let leg_press = monday.iter().find(|e| e.name == "Leg Press").unwrap();

        assert!(leg_press.rationale.as_ref().is_some_and(|r| !r.is_empty()));
        assert!(!monday.iter().any(|e| e.name == "Back Squat"));
    }

    #[test]
    fn test_no_injuries_leaves_squat_unchanged() {
        let mut profile = full_profile();
        profile.injuries = Some(vec![]);
        let preview = generate_deterministic_preview("user-1", &profile);

        let monday = preview.days[0].exercises.as_ref().unwrap();
        let squat = monday.iter().find(|e| e.name == "Back Squat").unwrap();
        assert!(squat.rationale.is_none());
    }

    #[test]
    fn test_end_to_end_cut_vegan_beginner_with_knee() {
        let preview = generate_deterministic_preview("user-1", &full_profile());

        assert_eq!(preview.nutrition.kcal, 2240); // 80 * 28
        assert_eq!(preview.nutrition.protein_grams, 176); // 80 * 2.2

        for (index, day) in preview.days.iter().enumerate() {
            match index {
                0 | 2 | 4 => {
                    let exercises = day.exercises.as_ref().unwrap();
                    assert_eq!(exercises.len(), 3);
                    assert!(exercises.iter().any(|e| e.name == "Leg Press"));
                    assert!(!exercises.iter().any(|e| e.name == "Back Squat"));
                }
                1 | 5 => assert!(day.focus.starts_with("Cardio")),
                _ => assert!(day.focus.starts_with("Rest")),
            }
        }
    }
}
