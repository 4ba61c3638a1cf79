//! End-to-end tests for the voice command pipeline: capture session →
//! transcript → parse → match → workout application.

use repvox::capture::ScriptedCapture;
use repvox::command::parse_command;
use repvox::matcher::{find_best_match, MatchResult, DEFAULT_ACCEPT_THRESHOLD};
use repvox::recording::{RecordingMachine, RecordingState};
use repvox::workout::{default_catalog, ApplyOptions, CommandOutcome, MuscleGroup, WorkoutSession};
use repvox::CommandError;

#[test]
fn parse_weight_and_reps_only() {
    let command = parse_command("100 kg 5 reps").unwrap();
    assert_eq!(command.exercise_name, None);
    assert_eq!(command.weight, 100.0);
    assert_eq!(command.reps, 5);
}

#[test]
fn parse_named_command() {
    let command = parse_command("Bench Press 100 kg 5 reps").unwrap();
    assert_eq!(command.exercise_name.as_deref(), Some("Bench Press"));
    assert_eq!(command.weight, 100.0);
    assert_eq!(command.reps, 5);
}

#[test]
fn parse_rejects_transcripts_without_numbers() {
    assert_eq!(parse_command(""), Err(CommandError::Unparseable));
    assert_eq!(
        parse_command("just words no numbers"),
        Err(CommandError::Unparseable)
    );
}

#[test]
fn parse_degrades_to_zero_reps() {
    let command = parse_command("Squat 80").unwrap();
    assert_eq!(command.exercise_name.as_deref(), Some("Squat"));
    assert_eq!(command.weight, 80.0);
    assert_eq!(command.reps, 0);
    assert!(command.reps_defaulted);
}

#[test]
fn parse_is_a_pure_function() {
    for _ in 0..3 {
        assert_eq!(
            parse_command("Deadlift 140 kg 3 reps").unwrap(),
            parse_command("Deadlift 140 kg 3 reps").unwrap()
        );
    }
}

#[test]
fn exact_catalog_match_is_case_insensitive() {
    let catalog = default_catalog();
    for entry in &catalog {
        let candidate = entry.name.to_uppercase();
        let names = catalog.iter().map(|e| e.name.as_str());
        assert_eq!(
            find_best_match(&candidate, names, DEFAULT_ACCEPT_THRESHOLD),
            MatchResult::Resolved(entry.name.clone()),
            "exact short-circuit failed for {:?}",
            entry.name
        );
    }
}

#[test]
fn gibberish_matches_nothing() {
    let catalog = default_catalog();
    let names = catalog.iter().map(|e| e.name.as_str());
    assert_eq!(
        find_best_match("xyz123", names, DEFAULT_ACCEPT_THRESHOLD),
        MatchResult::Unmatched
    );
}

#[tokio::test]
async fn full_pipeline_from_capture_to_logged_set() {
    let capture = ScriptedCapture::new();
    capture
        .queue_utterance(["Bench", "Bench Press 100", "Bench Press 100 kg 5 reps"])
        .await;

    let mut machine = RecordingMachine::new(Box::new(capture));
    machine.request_authorization().await.unwrap();
    machine.start().await.unwrap();
    let transcript = machine.stop().await.unwrap().unwrap();

    let command = parse_command(&transcript).unwrap();
    let mut session = WorkoutSession::new("Push Day");
    let outcome = session
        .apply_command(&command, None, &default_catalog(), &ApplyOptions::default())
        .unwrap();

    assert_eq!(
        outcome,
        CommandOutcome::AddedFromCatalog {
            exercise: "Bench Press".to_string()
        }
    );
    assert_eq!(session.exercises[0].muscle_group, MuscleGroup::Chest);
    assert_eq!(session.exercises[0].sets[0].weight, 100.0);
    assert_eq!(session.exercises[0].sets[0].reps, 5);
}

#[tokio::test]
async fn stop_while_idle_returns_no_transcript() {
    let capture = ScriptedCapture::new();
    let mut machine = RecordingMachine::new(Box::new(capture));
    machine.request_authorization().await.unwrap();

    assert_eq!(machine.stop().await.unwrap(), None);
}

#[tokio::test]
async fn double_start_does_not_open_two_sessions() {
    let capture = ScriptedCapture::new();
    capture.queue_utterance(["Squat 80 kg 5 reps"]).await;
    capture.queue_utterance(["second utterance"]).await;

    let mut machine = RecordingMachine::new(Box::new(capture.clone()));
    machine.request_authorization().await.unwrap();

    machine.start().await.unwrap();
    machine.start().await.unwrap();
    assert_eq!(capture.begin_count().await, 1);

    let transcript = machine.stop().await.unwrap();
    assert_eq!(transcript.as_deref(), Some("Squat 80 kg 5 reps"));
}

#[tokio::test]
async fn cancelled_recording_never_reaches_the_parser() {
    let capture = ScriptedCapture::new();
    capture.queue_utterance(["Deadlift 140 kg"]).await;

    let mut machine = RecordingMachine::new(Box::new(capture));
    machine.request_authorization().await.unwrap();
    machine.start().await.unwrap();
    machine.cancel().await;

    assert_eq!(machine.state(), RecordingState::Idle);
    assert_eq!(machine.partial_transcript(), "");
    assert_eq!(machine.stop().await.unwrap(), None);
}

#[tokio::test]
async fn consecutive_sets_accumulate_on_one_exercise() {
    let capture = ScriptedCapture::new();
    capture.queue_utterance(["Bench Press 100 kg 5 reps"]).await;
    capture.queue_utterance(["100 kg 4 reps"]).await;
    capture.queue_utterance(["95 kg 6 reps"]).await;

    let mut machine = RecordingMachine::new(Box::new(capture));
    machine.request_authorization().await.unwrap();

    let mut session = WorkoutSession::new("Bench Day");
    let catalog = default_catalog();
    let options = ApplyOptions::default();

    for _ in 0..3 {
        machine.start().await.unwrap();
        let transcript = machine.stop().await.unwrap().unwrap();
        let command = parse_command(&transcript).unwrap();
        session
            .apply_command(&command, None, &catalog, &options)
            .unwrap();
    }

    assert_eq!(session.exercises.len(), 1);
    assert_eq!(session.exercises[0].sets.len(), 3);
    assert_eq!(session.total_volume(), 100.0 * 5.0 + 100.0 * 4.0 + 95.0 * 6.0);
}
