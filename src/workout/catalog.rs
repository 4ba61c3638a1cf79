//! Built-in exercise catalog.

use serde::{Deserialize, Serialize};

/// Primary muscle group targeted by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    Other,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Core => "core",
            Self::Other => "other",
        }
    }
}

/// One known exercise, supplied to the matcher per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub muscle_group: MuscleGroup,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, muscle_group: MuscleGroup) -> Self {
        Self {
            name: name.into(),
            muscle_group,
        }
    }
}

/// The default seeded catalog.
pub fn default_catalog() -> Vec<CatalogEntry> {
    use MuscleGroup::*;

    [
        ("Bench Press", Chest),
        ("Incline Bench Press", Chest),
        ("Dumbbell Fly", Chest),
        ("Push Up", Chest),
        ("Squat", Legs),
        ("Front Squat", Legs),
        ("Leg Press", Legs),
        ("Lunge", Legs),
        ("Leg Curl", Legs),
        ("Calf Raise", Legs),
        ("Deadlift", Back),
        ("Barbell Row", Back),
        ("Pull Up", Back),
        ("Lat Pulldown", Back),
        ("Overhead Press", Shoulders),
        ("Lateral Raise", Shoulders),
        ("Face Pull", Shoulders),
        ("Bicep Curl", Arms),
        ("Hammer Curl", Arms),
        ("Tricep Extension", Arms),
        ("Plank", Core),
        ("Hanging Leg Raise", Core),
    ]
    .into_iter()
    .map(|(name, group)| CatalogEntry::new(name, group))
    .collect()
}
