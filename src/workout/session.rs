//! In-memory workout records and voice command application.
//!
//! Routing mirrors the workout screen: a spoken name resolves against the
//! session first, then the catalog; a nameless command lands on the
//! voice-selected target or the last exercise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::{CatalogEntry, MuscleGroup};
use crate::command::ParsedCommand;
use crate::error::CommandError;
use crate::matcher::{self, MatchResult, DEFAULT_ACCEPT_THRESHOLD};

/// One logged set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub weight: f64,
    pub reps: u32,
    pub order_index: usize,
    pub completed: bool,
}

/// One exercise within a workout, with its logged sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub order_index: usize,
    pub sets: Vec<ExerciseSet>,
}

impl WorkoutExercise {
    pub fn new(name: impl Into<String>, muscle_group: MuscleGroup, order_index: usize) -> Self {
        Self {
            name: name.into(),
            muscle_group,
            order_index,
            sets: Vec::new(),
        }
    }

    /// Append a set, numbering it after the existing ones. Returns the new
    /// set's order index.
    pub fn add_set(&mut self, weight: f64, reps: u32) -> usize {
        let order_index = self.sets.len();
        self.sets.push(ExerciseSet {
            weight,
            reps,
            order_index,
            completed: false,
        });
        order_index
    }
}

/// Knobs for applying a parsed command to a session.
#[derive(Debug, Clone, Copy)]
pub struct ApplyOptions {
    /// Fuzzy-match acceptance threshold.
    pub accept_threshold: f64,
    /// Whether an unmatched spoken name creates a new custom exercise.
    /// When false the command is dropped and reported as unmatched.
    pub create_unmatched: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
            create_unmatched: true,
        }
    }
}

/// What applying a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Set appended to an exercise already in the session.
    LoggedExisting { exercise: String },
    /// Exercise resolved from the catalog and added to the session.
    AddedFromCatalog { exercise: String },
    /// No catalog match; a new custom exercise was created as spoken.
    CreatedCustom { exercise: String },
    /// No catalog match and custom creation is disabled; nothing was logged.
    Unmatched { spoken: String },
}

impl CommandOutcome {
    /// Informational message to surface to the user, if any. A custom
    /// creation is not an error but the user may want to correct a
    /// misrecognition.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::CreatedCustom { exercise } => Some(format!(
                "Created new exercise '{exercise}'. Did you mean something else?"
            )),
            Self::Unmatched { spoken } => {
                Some(format!("No catalog exercise matches '{spoken}'."))
            }
            _ => None,
        }
    }
}

/// One workout, from start to finish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub title: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub exercises: Vec<WorkoutExercise>,
}

impl WorkoutSession {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            started_at: Utc::now(),
            ended_at: None,
            exercises: Vec::new(),
        }
    }

    pub fn finish(&mut self) {
        self.ended_at = Some(Utc::now());
    }

    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Total volume lifted, Σ weight × reps over every set.
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .map(|s| s.weight * s.reps as f64)
            .sum()
    }

    pub fn duration_minutes(&self) -> i64 {
        let end = self.ended_at.unwrap_or_else(Utc::now);
        (end - self.started_at).num_minutes().max(0)
    }

    /// Case-insensitive lookup of an exercise already in the session.
    pub fn find_exercise(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.exercises
            .iter()
            .position(|e| e.name.to_lowercase() == needle)
    }

    /// Append an exercise, numbering it after the existing ones.
    pub fn add_exercise(&mut self, name: impl Into<String>, muscle_group: MuscleGroup) -> usize {
        let index = self.exercises.len();
        self.exercises
            .push(WorkoutExercise::new(name, muscle_group, index));
        index
    }

    /// Apply a parsed voice command to this session.
    ///
    /// `selected` names the exercise a voice button was pressed on, if any;
    /// it only matters for nameless commands. The catalog is consulted when
    /// the spoken name is not already in the session.
    pub fn apply_command(
        &mut self,
        command: &ParsedCommand,
        selected: Option<&str>,
        catalog: &[CatalogEntry],
        options: &ApplyOptions,
    ) -> Result<CommandOutcome, CommandError> {
        let (index, outcome) = match &command.exercise_name {
            None => {
                let index = selected
                    .and_then(|name| self.find_exercise(name))
                    .or_else(|| self.exercises.len().checked_sub(1))
                    .ok_or(CommandError::NoActiveExercise)?;
                let exercise = self.exercises[index].name.clone();
                (Some(index), CommandOutcome::LoggedExisting { exercise })
            }
            Some(spoken) => {
                if let Some(index) = self.find_exercise(spoken) {
                    let exercise = self.exercises[index].name.clone();
                    (Some(index), CommandOutcome::LoggedExisting { exercise })
                } else {
                    self.resolve_spoken_exercise(spoken, catalog, options)
                }
            }
        };

        let Some(index) = index else {
            // Unmatched with custom creation disabled; nothing to log.
            return Ok(outcome);
        };

        let set_number = self.exercises[index].add_set(command.weight, command.reps) + 1;
        info!(
            "Logged set {} on {:?}: {} x {}",
            set_number, self.exercises[index].name, command.weight, command.reps
        );
        Ok(outcome)
    }

    fn resolve_spoken_exercise(
        &mut self,
        spoken: &str,
        catalog: &[CatalogEntry],
        options: &ApplyOptions,
    ) -> (Option<usize>, CommandOutcome) {
        let names = catalog.iter().map(|e| e.name.as_str());
        match matcher::find_best_match(spoken, names, options.accept_threshold) {
            MatchResult::Resolved(matched) => {
                // The matched catalog exercise may already be in the session
                // under its canonical name.
                if let Some(index) = self.find_exercise(&matched) {
                    let exercise = self.exercises[index].name.clone();
                    return (Some(index), CommandOutcome::LoggedExisting { exercise });
                }
                let muscle_group = catalog
                    .iter()
                    .find(|e| e.name == matched)
                    .map(|e| e.muscle_group)
                    .unwrap_or(MuscleGroup::Other);
                let index = self.add_exercise(&matched, muscle_group);
                (
                    Some(index),
                    CommandOutcome::AddedFromCatalog { exercise: matched },
                )
            }
            MatchResult::Unmatched if options.create_unmatched => {
                debug!("No catalog match for {:?}; creating custom exercise", spoken);
                let index = self.add_exercise(spoken, MuscleGroup::Other);
                (
                    Some(index),
                    CommandOutcome::CreatedCustom {
                        exercise: spoken.to_string(),
                    },
                )
            }
            MatchResult::Unmatched => (
                None,
                CommandOutcome::Unmatched {
                    spoken: spoken.to_string(),
                },
            ),
        }
    }
}
