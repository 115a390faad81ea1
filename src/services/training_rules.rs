//! Pure transformations over an existing training week. Each function
//! describes a bounded change as a [`TrainingPatch`] with a populated
//! reason; none of them mutate the plan they are given. Plans are expected
//! to contain at least one day — an empty slice degrades to a no-op or a
//! best-effort patch rather than a panic.

use regex::Regex;

use crate::models::patch::{
    ExerciseSwap, IntensityTweak, PatchReason, TrainingPatch, VolumeTweak,
};
use crate::models::plan::{PreviewDay, Weekday};
use crate::models::profile::InjuryArea;
use crate::services::safety::{
    DELOAD_MIN_RPE, DELOAD_SET_FRACTION, PROGRESSION_MAX_SETS_PER_CALL, PROGRESSION_SET_FRACTION,
};
use crate::services::substitutions;

/// Declares a new weekly frequency target. Deliberately narrow: the patch
/// names the target only, and which concrete days move is left to the
/// caller realizing the patch.
pub fn patch_set_days_per_week(current: &[PreviewDay], days_per_week: u8) -> TrainingPatch {
    let active_days = current.iter().filter(|day| day.has_exercises()).count();

    let mut patch = TrainingPatch::with_reason(PatchReason {
        summary: format!("Train {days_per_week} days per week going forward."),
        bullets: vec![
            format!("The current plan has {active_days} days with exercises."),
            "Existing sessions are kept; days beyond the target become rest or mobility work."
                .to_string(),
        ],
    });
    patch.days_per_week = Some(days_per_week);
    patch
}

/// Swaps one exercise for another on the requested day, falling back to
/// the nearest sensible day when the plan doesn't contain it.
pub fn patch_swap_exercise(
    current: &[PreviewDay],
    day: Weekday,
    from_exercise: &str,
    to_exercise: &str,
) -> TrainingPatch {
    let resolved = resolve_day(current, day);

    let mut patch = TrainingPatch::with_reason(PatchReason {
        summary: format!(
            "Swap {from_exercise} for {to_exercise} on {}.",
            resolved.label()
        ),
        bullets: vec![
            "Sets and reps carry over, so there is no change in total volume.".to_string(),
        ],
    });
    patch.swaps = vec![ExerciseSwap {
        day: resolved,
        from_exercise: from_exercise.to_string(),
        to_exercise: to_exercise.to_string(),
    }];
    patch
}

/// Requested day if present, else the first day with any exercises, else
/// the first day overall.
fn resolve_day(current: &[PreviewDay], requested: Weekday) -> Weekday {
    if current.iter().any(|day| day.day == requested) {
        return requested;
    }
    current
        .iter()
        .find(|day| day.has_exercises())
        .or_else(|| current.first())
        .map(|day| day.day)
        .unwrap_or(requested)
}

/// Proposes one bounded set increase on the primary lift of each training
/// day. The increase is capped at 20% of current sets and at one set per
/// call; the smaller bound wins. Returns None when no day has exercises.
pub fn patch_progression(current: &[PreviewDay]) -> Option<TrainingPatch> {
    let mut volume_tweaks = Vec::new();

    for day in current {
        let Some(exercises) = day.exercises.as_ref() else {
            continue;
        };
        let Some(primary) = exercises.first() else {
            continue;
        };

        volume_tweaks.push(VolumeTweak {
            day: day.day,
            exercise: primary.name.clone(),
            delta_sets: Some(progression_delta(primary.sets)),
            delta_reps: None,
        });
    }

    if volume_tweaks.is_empty() {
        return None;
    }

    let day_count = volume_tweaks.len();
    let mut patch = TrainingPatch::with_reason(PatchReason {
        summary: "Add a set to the primary lift of each training day.".to_string(),
        bullets: vec![
            format!("{day_count} training days progress this week."),
            "Increases are capped at 20% of current sets and never exceed one set per call."
                .to_string(),
        ],
    });
    patch.volume_tweaks = volume_tweaks;
    Some(patch)
}

fn progression_delta(sets: u32) -> i32 {
    let by_fraction = ((f64::from(sets)) * PROGRESSION_SET_FRACTION).floor() as i32;
    by_fraction.max(1).min(PROGRESSION_MAX_SETS_PER_CALL)
}

/// Proposes a recovery week: roughly 30% fewer sets on every exercise
/// (minimum one set removed) and target effort lowered by one RPE point,
/// never below RPE 5. Returns None when no day has exercises.
pub fn patch_deload(current: &[PreviewDay]) -> Option<TrainingPatch> {
    let mut volume_tweaks = Vec::new();
    let mut intensity_tweaks = Vec::new();

    for day in current {
        let Some(exercises) = day.exercises.as_ref() else {
            continue;
        };
        for exercise in exercises {
            volume_tweaks.push(VolumeTweak {
                day: day.day,
                exercise: exercise.name.clone(),
                delta_sets: Some(-deload_reduction(exercise.sets)),
                delta_reps: None,
            });

            if let Some(rpe) = exercise.rpe.as_deref()
                && let Some(lowered) = lowered_rpe(rpe)
            {
                intensity_tweaks.push(IntensityTweak {
                    day: day.day,
                    exercise: exercise.name.clone(),
                    rpe: lowered,
                });
            }
        }
    }

    if volume_tweaks.is_empty() {
        return None;
    }

    let mut patch = TrainingPatch::with_reason(PatchReason {
        summary: "Take a deload week to recover.".to_string(),
        bullets: vec![
            "Sets reduced by roughly 30% on every exercise.".to_string(),
            format!("Target effort lowered by one RPE point, never below RPE {DELOAD_MIN_RPE}."),
        ],
    });
    patch.volume_tweaks = volume_tweaks;
    patch.intensity_tweaks = intensity_tweaks;
    patch.deload = true;
    Some(patch)
}

fn deload_reduction(sets: u32) -> i32 {
    (((f64::from(sets)) * DELOAD_SET_FRACTION).round() as i32).max(1)
}

/// Lowers the leading number of an RPE string by one, clamped at the
/// deload floor. Strings without a number are left untouched.
fn lowered_rpe(rpe: &str) -> Option<String> {
    let number = Regex::new(r"(\d+)").unwrap();
    let value: u32 = number.captures(rpe)?.get(1)?.as_str().parse().ok()?;
    let lowered = value.saturating_sub(1).max(DELOAD_MIN_RPE);
    Some(format!("RPE {lowered}"))
}

/// Scans the whole week against the injury substitution table and swaps
/// every matching exercise. Returns None when there are no injuries or
/// nothing matches, so callers can distinguish "nothing to do" from an
/// actual patch.
pub fn apply_injury_substitutions(
    days: &[PreviewDay],
    injuries: &[InjuryArea],
) -> Option<TrainingPatch> {
    if injuries.is_empty() {
        return None;
    }

    let mut swaps = Vec::new();
    let mut bullets = Vec::new();

    for day in days {
        let Some(exercises) = day.exercises.as_ref() else {
            continue;
        };
        for exercise in exercises {
            if let Some(rule) = substitutions::substitute_for(&exercise.name, injuries) {
                swaps.push(ExerciseSwap {
                    day: day.day,
                    from_exercise: exercise.name.clone(),
                    to_exercise: rule.replacement.to_string(),
                });
                bullets.push(format!("{}: {}", exercise.name, rule.rationale));
            }
        }
    }

    if swaps.is_empty() {
        return None;
    }

    let mut patch = TrainingPatch::with_reason(PatchReason {
        summary: "Swap exercises that load reported injury areas.".to_string(),
        bullets,
    });
    patch.swaps = swaps;
    Some(patch)
}
