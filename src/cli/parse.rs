use anyhow::Result;

use super::args::ParseCliArgs;
use crate::command::parse_command;

pub fn handle_parse_command(args: ParseCliArgs) -> Result<()> {
    let text = args.text.join(" ");
    let command = parse_command(&text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&command)?);
        return Ok(());
    }

    match &command.exercise_name {
        Some(name) => println!("Exercise: {}", name),
        None => println!("Exercise: (none spoken)"),
    }
    match command.unit {
        Some(unit) => println!("Weight: {} {}", command.weight, unit.as_str()),
        None => println!("Weight: {}", command.weight),
    }
    if command.reps_defaulted {
        println!("Reps: 0 (not spoken)");
    } else {
        println!("Reps: {}", command.reps);
    }

    Ok(())
}
