// UI layer: collects the four answers and runs the load -> collect ->
// persist -> emit pipeline. Prompting sits behind the `AnswerSource` trait
// so the pipeline can be driven by a real terminal or by canned answers in
// tests.

use crate::error::StandupError;
use crate::output::Sink;
use crate::record::{Presupplied, StatusRecord};
use crate::store::{self, Settings};
use dialoguer::{Confirm, Input};
use std::io::{self, Write};

/// Capability for answering the standup questions. `text` must yield a
/// non-empty answer or an error; `collect` re-validates either way.
pub trait AnswerSource {
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String, StandupError>;
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, StandupError>;
}

/// Interactive implementation over `dialoguer`. Empty text input is
/// rejected in place and re-prompted; Enter on a prompt with a default
/// accepts the default.
pub struct TerminalPrompts;

impl AnswerSource for TerminalPrompts {
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String, StandupError> {
        let mut input: Input<String> = Input::new();
        input
            .with_prompt(prompt)
            .validate_with(|answer: &String| -> Result<(), &str> {
                if answer.trim().is_empty() {
                    Err("response cannot be empty")
                } else {
                    Ok(())
                }
            });
        if let Some(value) = default {
            input.default(value.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, StandupError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

fn prompt_error(err: io::Error) -> StandupError {
    if err.kind() == io::ErrorKind::Interrupted {
        StandupError::Interrupted
    } else {
        StandupError::Io(err)
    }
}

/// Build this run's record. Fields covered by `given` are taken as-is;
/// prompting only happens while a required text field is missing. When it
/// does happen, defaults come from the previous record: yesterday's prompt
/// pre-fills with the previous "today", the confirmations with the previous
/// booleans. When both text fields are presupplied nothing is asked at all
/// and absent booleans fall back to false.
pub fn collect(
    previous: &StatusRecord,
    given: &Presupplied,
    answers: &mut dyn AnswerSource,
) -> Result<StatusRecord, StandupError> {
    let prompting = !given.covers_required();

    let yesterday = match &given.yesterday {
        Some(value) => value.clone(),
        None => {
            let default = if previous.today.is_empty() {
                None
            } else {
                Some(previous.today.as_str())
            };
            answers.text("What did you do yesterday?", default)?
        }
    };
    let today = match &given.today {
        Some(value) => value.clone(),
        None => answers.text("What are you working on today?", None)?,
    };
    let blocked = match given.blocked {
        Some(value) => value,
        None if prompting => answers.confirm("Are you blocked?", previous.blocked)?,
        None => false,
    };
    let on_time = match given.on_time {
        Some(value) => value,
        None if prompting => answers.confirm("Are you on time?", previous.on_time)?,
        None => false,
    };

    // Final gate for both the presupplied path and scripted sources.
    if yesterday.trim().is_empty() {
        return Err(StandupError::EmptyInput("yesterday"));
    }
    if today.trim().is_empty() {
        return Err(StandupError::EmptyInput("today"));
    }

    Ok(StatusRecord {
        yesterday,
        today,
        blocked,
        on_time,
    })
}

/// Run one standup: load the previous answers, collect this run's record,
/// open the sink, save the record for next time (warning only on failure),
/// and write the message. The sink is opened before persisting so a bad
/// output path aborts the run with no state touched.
pub fn run(
    settings: &Settings,
    given: &Presupplied,
    sink: &Sink,
    answers: &mut dyn AnswerSource,
) -> Result<(), StandupError> {
    let previous = store::load_previous(settings)?;
    let record = collect(&previous, given, answers)?;
    let mut out = sink.open()?;
    if let Err(err) = store::persist(settings, &record) {
        eprintln!("warning: {err}");
    }
    out.write_all(record.render().as_bytes())?;
    Ok(())
}
