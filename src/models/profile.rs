use serde::{Deserialize, Serialize};

use crate::models::plan::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Maintain,
    Gain,
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Regular,
    Vegan,
    Vegetarian,
    Keto,
    #[serde(rename = "none")]
    NoPreference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjuryArea {
    Knee,
    Shoulder,
    Back,
    Elbow,
    Ankle,
    Hip,
    None,
}

impl InjuryArea {
    pub fn as_str(self) -> &'static str {
        match self {
            InjuryArea::Knee => "knee",
            InjuryArea::Shoulder => "shoulder",
            InjuryArea::Back => "back",
            InjuryArea::Elbow => "elbow",
            InjuryArea::Ankle => "ankle",
            InjuryArea::Hip => "hip",
            InjuryArea::None => "none",
        }
    }
}

/// User-reported intake data collected incrementally by the onboarding
/// conversation. Every field is optional; the engine never reads a raw
/// `Profile` directly, it goes through [`Profile::normalize`] first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub goal: Option<Goal>,
    pub experience_level: Option<ExperienceLevel>,
    pub body_weight_kg: Option<f64>,
    pub diet: Option<Diet>,
    pub days_per_week: Option<u8>,
    pub preferred_days: Option<Vec<Weekday>>,
    pub equipment: Option<Vec<String>>,
    pub injuries: Option<Vec<InjuryArea>>,
    pub preferences: Option<String>,
}

/// Number of intake fields tracked by [`Profile::completion_percent`].
const TRACKED_INTAKE_FIELDS: usize = 6;

/// Minimum completion percentage before a plan preview is generated.
pub const PREVIEW_READY_PERCENT: u8 = 80;

impl Profile {
    /// How much of the tracked intake (goal, experience, body weight, diet,
    /// schedule, injuries) the user has answered so far. An explicit empty
    /// injuries list counts as answered.
    pub fn completion_percent(&self) -> u8 {
        let answered = [
            self.goal.is_some(),
            self.experience_level.is_some(),
            self.body_weight_kg.is_some(),
            self.diet.is_some(),
            self.days_per_week.is_some() || self.preferred_days.is_some(),
            self.injuries.is_some(),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count();

        ((answered * 100) / TRACKED_INTAKE_FIELDS) as u8
    }

    /// Applies defaults exactly once, so the plan generator and the
    /// standalone nutrition rule are guaranteed to see identical values.
    /// Injuries come out sorted and deduplicated, which also keeps the
    /// content hash stable under input ordering.
    pub fn normalize(&self) -> NormalizedProfile {
        let mut injuries = self.injuries.clone().unwrap_or_default();
        injuries.sort_by_key(|injury| injury.as_str());
        injuries.dedup();

        NormalizedProfile {
            goal: self.goal.unwrap_or(Goal::Maintain),
            experience_level: self.experience_level.unwrap_or(ExperienceLevel::Beginner),
            body_weight_kg: self.body_weight_kg.unwrap_or(70.0),
            diet: self.diet.unwrap_or(Diet::Regular),
            injuries,
        }
    }
}

/// A profile with all defaults applied. The only shape the engine works on.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProfile {
    pub goal: Goal,
    pub experience_level: ExperienceLevel,
    pub body_weight_kg: f64,
    pub diet: Diet,
    pub injuries: Vec<InjuryArea>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_normalizes_to_defaults() {
        let normalized = Profile::default().normalize();

        assert_eq!(normalized.goal, Goal::Maintain);
        assert_eq!(normalized.experience_level, ExperienceLevel::Beginner);
        assert_eq!(normalized.body_weight_kg, 70.0);
        assert_eq!(normalized.diet, Diet::Regular);
        assert!(normalized.injuries.is_empty());
    }

    #[test]
    fn test_normalize_sorts_and_dedupes_injuries() {
        let profile = Profile {
            injuries: Some(vec![InjuryArea::Knee, InjuryArea::Back, InjuryArea::Knee]),
            ..Profile::default()
        };

        assert_eq!(
            profile.normalize().injuries,
            vec![InjuryArea::Back, InjuryArea::Knee]
        );
    }

    #[test]
    fn test_completion_percent_empty_profile() {
        assert_eq!(Profile::default().completion_percent(), 0);
    }

    #[test]
    fn test_completion_percent_full_profile() {
        let profile = Profile {
            goal: Some(Goal::Cut),
            experience_level: Some(ExperienceLevel::Beginner),
            body_weight_kg: Some(80.0),
            diet: Some(Diet::Vegan),
            days_per_week: Some(3),
            injuries: Some(vec![]),
            ..Profile::default()
        };

        assert_eq!(profile.completion_percent(), 100);
    }

    #[test]
    fn test_completion_percent_partial_profile() {
        let profile = Profile {
            goal: Some(Goal::Gain),
            body_weight_kg: Some(90.0),
            diet: Some(Diet::Keto),
            experience_level: Some(ExperienceLevel::Advanced),
            injuries: Some(vec![InjuryArea::Shoulder]),
            ..Profile::default()
        };

        // 5 of 6 tracked fields, schedule still unanswered
        assert_eq!(profile.completion_percent(), 83);
        assert!(profile.completion_percent() >= PREVIEW_READY_PERCENT);
    }

    #[test]
    fn test_preferred_days_count_as_schedule() {
        let profile = Profile {
            preferred_days: Some(vec![Weekday::Mon, Weekday::Thu]),
            ..Profile::default()
        };

        assert_eq!(profile.completion_percent(), 16);
    }

    #[test]
    fn test_equipment_and_preferences_do_not_affect_completion() {
        let profile = Profile {
            equipment: Some(vec!["barbell".to_string()]),
            preferences: Some("no burpees".to_string()),
            ..Profile::default()
        };

        assert_eq!(profile.completion_percent(), 0);
    }
}
