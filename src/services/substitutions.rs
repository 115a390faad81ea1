use regex::Regex;

use crate::models::profile::InjuryArea;

/// One row of the injury substitution table: exercises whose name matches
/// `pattern` are replaced wholesale by `replacement`.
#[derive(Debug)]
pub struct SubstitutionRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub rationale: &'static str,
}

const KNEE_SUBSTITUTIONS: &[SubstitutionRule] = &[
    SubstitutionRule {
        pattern: r"(?i)squat",
        replacement: "Leg Press",
        rationale: "Knee-friendly swap for Squat",
    },
    SubstitutionRule {
        pattern: r"(?i)lunge",
        replacement: "Step-ups",
        rationale: "Reduced knee shear vs Lunges",
    },
];

/// Substitution rules per injury area. The match is deliberately
/// exhaustive so an area without a table is a visible gap here rather
/// than a silent no-op. Only knee has coach-approved swaps so far; the
/// remaining areas stay empty until product provides them.
pub fn rules_for(injury: InjuryArea) -> &'static [SubstitutionRule] {
    match injury {
        InjuryArea::Knee => KNEE_SUBSTITUTIONS,
        InjuryArea::Shoulder
        | InjuryArea::Back
        | InjuryArea::Elbow
        | InjuryArea::Ankle
        | InjuryArea::Hip
        | InjuryArea::None => &[],
    }
}

/// First rule matching the exercise name across the reported injuries,
/// in injury order. None means the exercise stays as-is.
pub fn substitute_for(
    exercise_name: &str,
    injuries: &[InjuryArea],
) -> Option<&'static SubstitutionRule> {
    for injury in injuries {
        for rule in rules_for(*injury) {
            let pattern = Regex::new(rule.pattern).unwrap();
            if pattern.is_match(exercise_name) {
                return Some(rule);
            }
        }
    }
    None
}
