//! Interactive session mode: each typed line plays the role of one finished
//! recording, driving the full controller → parser → matcher → workout
//! pipeline.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::capture::ScriptedCapture;
use crate::command::parse_command;
use crate::config::Config;
use crate::recording::RecordingMachine;
use crate::workout::{default_catalog, ApplyOptions, CommandOutcome, WorkoutSession};

pub async fn run_interactive(config: Config) -> Result<()> {
    println!("Repvox: say a set, one line at a time.");
    println!("Examples: 'Bench Press 100 kg 5 reps' or '95 kg 3 reps'");
    println!("'target <exercise>' aims nameless commands, 'target -' clears, 'done' finishes.");

    let capture = ScriptedCapture::new();
    let feed = capture.clone();
    let mut machine = RecordingMachine::new(Box::new(capture));
    machine.request_authorization().await?;

    let catalog = default_catalog();
    let options = ApplyOptions {
        accept_threshold: config.matcher.accept_threshold,
        create_unmatched: config.behavior.create_unmatched_exercises,
    };
    let mut session = WorkoutSession::new(&config.session.default_title);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("done") || text.eq_ignore_ascii_case("quit") {
            break;
        }
        if let Some(rest) = text.strip_prefix("target ") {
            let rest = rest.trim();
            let target = (rest != "-").then(|| rest.to_string());
            if machine.select_target(target) {
                match machine.target() {
                    Some(name) => println!("Targeting {}", name),
                    None => println!("Target cleared"),
                }
            } else {
                println!("Cannot change target while recording");
            }
            continue;
        }

        feed.queue_utterance([text]).await;
        machine.start().await?;
        let Some(transcript) = machine.stop().await? else {
            continue;
        };

        let command = match parse_command(&transcript) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let selected = machine.target().map(str::to_string);
        match session.apply_command(&command, selected.as_deref(), &catalog, &options) {
            Ok(outcome) => {
                if let CommandOutcome::LoggedExisting { exercise }
                | CommandOutcome::AddedFromCatalog { exercise }
                | CommandOutcome::CreatedCustom { exercise } = &outcome
                {
                    println!("Logged {} x {} on {}", command.weight, command.reps, exercise);
                }
                if let Some(notice) = outcome.notice() {
                    println!("{}", notice);
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    session.finish();
    println!(
        "\n{}: {} exercises, {} sets, {:.0} volume in {} min",
        session.title,
        session.exercises.len(),
        session.set_count(),
        session.total_volume(),
        session.duration_minutes()
    );

    Ok(())
}
