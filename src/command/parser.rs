//! Free-form set command parsing.
//!
//! The grammar is strictly "words, number, [unit], number, [marker]" with no
//! backtracking: the first numeric token anchors the weight, the next numeric
//! token anchors the reps.

use tracing::debug;

use super::types::ParsedCommand;
use crate::error::CommandError;
use crate::normalizer::{normalize, TokenKind};

/// Parse a raw transcript into a [`ParsedCommand`].
///
/// Pure function of its input; parsing the same transcript twice yields
/// identical values. Fails with [`CommandError::Unparseable`] when the
/// transcript contains no numeric token at all; no partial command is ever
/// returned.
pub fn parse_command(text: &str) -> Result<ParsedCommand, CommandError> {
    let tokens = normalize(text);

    let anchor = tokens
        .iter()
        .position(|t| t.number().is_some())
        .ok_or(CommandError::Unparseable)?;
    let weight = tokens[anchor].number().ok_or(CommandError::Unparseable)?;

    // Everything strictly before the weight anchor is the candidate name,
    // minus trailing unit/marker artifacts directly before the number.
    let mut name_end = anchor;
    while name_end > 0 && !tokens[name_end - 1].is_word() {
        name_end -= 1;
    }
    let exercise_name = if name_end == 0 {
        None
    } else {
        let joined = tokens[..name_end]
            .iter()
            .map(|t| t.raw.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Some(joined)
    };

    // Optional unit right after the weight; consumed but never converted.
    let mut cursor = anchor + 1;
    let mut unit = None;
    if let Some(TokenKind::Unit(spoken)) = tokens.get(cursor).map(|t| t.kind.clone()) {
        unit = Some(spoken);
        cursor += 1;
    }

    // Next numeric token is the reps anchor; anything between is ignored.
    let mut reps = 0u32;
    let mut reps_defaulted = true;
    for token in &tokens[cursor..] {
        if let Some(value) = token.number() {
            reps = value as u32;
            reps_defaulted = false;
            break;
        }
    }

    let command = ParsedCommand {
        exercise_name,
        weight,
        reps,
        unit,
        reps_defaulted,
    };
    debug!("Parsed {:?} from {:?}", command, text);
    Ok(command)
}
