// Flag surface. Every answer can be presupplied here to skip its prompt;
// `--blocked` / `--on-time` take an optional value so bare presence means
// true while `--blocked=false` presupplies an explicit no.

use crate::output::Sink;
use crate::record::Presupplied;
use crate::store::Settings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "standup", about = "Create a standup message", version)]
pub struct Args {
    /// What you did yesterday (skips the prompt)
    #[arg(long)]
    pub yesterday: Option<String>,

    /// What you are working on today (skips the prompt)
    #[arg(long)]
    pub today: Option<String>,

    /// Whether you are blocked
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub blocked: Option<bool>,

    /// Whether you are on time
    #[arg(long = "on-time", num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub on_time: Option<bool>,

    /// Write the message to this file instead of the console
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use this state file instead of ~/.standup
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,
}

impl Args {
    pub fn presupplied(&self) -> Presupplied {
        Presupplied {
            yesterday: self.yesterday.clone(),
            today: self.today.clone(),
            blocked: self.blocked,
            on_time: self.on_time,
        }
    }

    pub fn settings(&self) -> Settings {
        match &self.state_file {
            Some(path) => Settings::with_state_path(path.clone()),
            None => Settings::resolve(),
        }
    }

    pub fn sink(&self) -> Sink {
        match &self.output {
            Some(path) => Sink::File(path.clone()),
            None => Sink::Stdout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_boolean_flags_presupply_true() {
        let args = Args::parse_from(["standup", "--blocked", "--on-time"]);
        let given = args.presupplied();
        assert_eq!(given.blocked, Some(true));
        assert_eq!(given.on_time, Some(true));
    }

    #[test]
    fn boolean_flags_accept_explicit_false() {
        let args = Args::parse_from(["standup", "--blocked=false", "--on-time=false"]);
        let given = args.presupplied();
        assert_eq!(given.blocked, Some(false));
        assert_eq!(given.on_time, Some(false));
    }

    #[test]
    fn absent_flags_leave_fields_unsatisfied() {
        let args = Args::parse_from(["standup"]);
        let given = args.presupplied();
        assert!(given.yesterday.is_none());
        assert!(given.today.is_none());
        assert!(given.blocked.is_none());
        assert!(given.on_time.is_none());
        assert!(!given.covers_required());
    }

    #[test]
    fn text_flags_cover_the_required_fields() {
        let args = Args::parse_from(["standup", "--yesterday", "a", "--today", "b"]);
        assert!(args.presupplied().covers_required());
    }

    #[test]
    fn state_file_flag_overrides_default_location() {
        let args = Args::parse_from(["standup", "--state-file", "/tmp/alt-standup"]);
        assert_eq!(args.settings().state_path, PathBuf::from("/tmp/alt-standup"));
    }
}
