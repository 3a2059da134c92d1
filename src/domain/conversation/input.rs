//! Enumerated-input classification.
//!
//! Replaces free-text pattern dispatch with an explicit classifier: every
//! inbound text maps to exactly one `UserInput` variant, matched exactly
//! and case-sensitively against the fixed vocabularies.

use crate::domain::conversation::InboundEvent;
use crate::domain::curriculum::{Grade, Subject};
use crate::domain::foundation::ValidationError;
use crate::domain::schedule::WEEKS_PER_YEAR;

/// The fixed restart phrase, rendered as a quick-reply button by transports.
pub const RESTART_PHRASE: &str = "🔄 Yeniden Başlat";

/// Classified inbound input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// The `/start` command: create or reset the session.
    Start,
    /// The `/help` command: static text, no state effect.
    Help,
    /// The `/hafta` command with its raw argument, if any.
    WeekQuery(Option<String>),
    /// The fixed restart phrase, equivalent to `/start`.
    Restart,
    /// A grade selection token.
    Grade(Grade),
    /// A subject selection token.
    Subject(Subject),
    /// Anything else; carried verbatim for diagnostics.
    Unrecognized(String),
}

/// Classifies an inbound event into an enumerated input.
///
/// Commands are slash-prefixed; the week argument comes from the event's
/// pre-split `command_args` when present, otherwise from the text itself.
pub fn classify(event: &InboundEvent) -> UserInput {
    let text = event.text.as_str();

    if let Some(rest) = text.strip_prefix('/') {
        let mut tokens = rest.split_whitespace();
        return match tokens.next() {
            Some("start") => UserInput::Start,
            Some("help") => UserInput::Help,
            Some("hafta") => {
                let arg = event
                    .command_args
                    .as_ref()
                    .and_then(|args| args.first().cloned())
                    .or_else(|| tokens.next().map(str::to_string));
                UserInput::WeekQuery(arg)
            }
            _ => UserInput::Unrecognized(text.to_string()),
        };
    }

    if text == RESTART_PHRASE {
        return UserInput::Restart;
    }
    if let Some(grade) = Grade::from_input(text) {
        return UserInput::Grade(grade);
    }
    if let Some(subject) = Subject::from_input(text) {
        return UserInput::Subject(subject);
    }

    UserInput::Unrecognized(text.to_string())
}

/// Validates the `/hafta` argument into a week number.
///
/// A missing argument, a non-numeric argument, and an out-of-range number
/// all reject; the caller answers every rejection with the same usage
/// guidance.
///
/// # Errors
///
/// - `EmptyField` if no argument was given
/// - `InvalidFormat` if the argument is not an integer
/// - `OutOfRange` if the number is outside [1, 40]
pub fn parse_week_argument(arg: Option<&str>) -> Result<u8, ValidationError> {
    let raw = arg.ok_or_else(|| ValidationError::empty_field("week"))?;

    let week = raw
        .parse::<i32>()
        .map_err(|_| ValidationError::invalid_format("week", "not a number"))?;

    if !(1..=i32::from(WEEKS_PER_YEAR)).contains(&week) {
        return Err(ValidationError::out_of_range(
            "week",
            1,
            i32::from(WEEKS_PER_YEAR),
            week,
        ));
    }

    Ok(week as u8)
}
