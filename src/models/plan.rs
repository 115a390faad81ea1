use serde::{Deserialize, Serialize};

/// Plan days are always Mon→Sun; serialized labels match the stored shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewExercise {
    pub name: String,
    pub sets: u32,
    /// Rep range as shown to the user, e.g. "8-10".
    pub reps: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<String>,
    /// Present when the exercise was substituted, explaining why.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewDay {
    pub day: Weekday,
    pub focus: String,
    /// Absent on rest and cardio days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<PreviewExercise>>,
}

impl PreviewDay {
    pub fn has_exercises(&self) -> bool {
        self.exercises
            .as_ref()
            .is_some_and(|exercises| !exercises.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub kcal: u32,
    pub protein_grams: u32,
    pub carbs_grams: u32,
    pub fat_grams: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// One deterministic week of training plus nutrition targets. The hash is
/// a pure function of the generation inputs, so regenerating from an
/// unchanged profile reproduces it byte for byte. At most one live preview
/// exists per user; the caller overwrites on regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPreview {
    pub user_id: String,
    pub days: Vec<PreviewDay>,
    pub nutrition: NutritionSummary,
    pub content_hash: String,
}
