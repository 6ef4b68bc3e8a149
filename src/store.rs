// Persistence for the previous run's answers. The state lives in a single
// JSON file (by default `.standup` in the user's home directory), read once
// at startup and fully overwritten at the end of a successful run.

use crate::error::StandupError;
use crate::record::StatusRecord;
use std::fs;
use std::path::PathBuf;

const STATE_FILE_NAME: &str = ".standup";

/// Resolved configuration for a run. Carrying the path explicitly (instead
/// of a process-wide variable) lets tests point at a temp file without
/// touching the real user state.
#[derive(Debug, Clone)]
pub struct Settings {
    pub state_path: PathBuf,
}

impl Settings {
    /// Default location: `~/.standup`, falling back to the current
    /// directory when no home directory can be determined.
    pub fn resolve() -> Self {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Settings {
            state_path: dir.join(STATE_FILE_NAME),
        }
    }

    pub fn with_state_path(state_path: PathBuf) -> Self {
        Settings { state_path }
    }
}

/// Load the previous run's record. A missing file is not an error (first
/// run); an unreadable or malformed file is, since it means the state is
/// corrupt and silently discarding it would lose the user's defaults.
pub fn load_previous(settings: &Settings) -> Result<StatusRecord, StandupError> {
    let path = &settings.state_path;
    if !path.exists() {
        return Ok(StatusRecord::default());
    }
    let data = fs::read_to_string(path).map_err(|e| StandupError::FileRead {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&data).map_err(|e| StandupError::FileDecode {
        path: path.clone(),
        reason: e.to_string(),
    })
}

/// Overwrite the state file with this run's record. Callers treat failure
/// as a warning: losing next run's defaults is not worth losing today's
/// message.
pub fn persist(settings: &Settings, record: &StatusRecord) -> Result<(), StandupError> {
    let data =
        serde_json::to_string(record).map_err(|e| StandupError::Persist(e.to_string()))?;
    fs::write(&settings.state_path, data).map_err(|e| StandupError::Persist(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn temp_settings(dir: &tempfile::TempDir) -> Settings {
        Settings::with_state_path(dir.path().join(".standup"))
    }

    #[test]
    fn missing_file_loads_as_default() {
        let dir = tempdir().expect("tempdir");
        let record = load_previous(&temp_settings(&dir)).expect("load");
        assert_eq!(record, StatusRecord::default());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let settings = temp_settings(&dir);
        let record = StatusRecord {
            yesterday: "shipped the parser".into(),
            today: "fix the lexer".into(),
            blocked: true,
            on_time: false,
        };
        persist(&settings, &record).expect("persist");
        assert_eq!(load_previous(&settings).expect("load"), record);
    }

    #[test]
    fn malformed_state_is_a_decode_error() {
        let dir = tempdir().expect("tempdir");
        let settings = temp_settings(&dir);
        fs::write(&settings.state_path, "not json {{").expect("write");
        match load_previous(&settings) {
            Err(StandupError::FileDecode { .. }) => {}
            other => panic!("expected FileDecode, got {other:?}"),
        }
    }

    #[test]
    fn persist_overwrites_prior_state() {
        let dir = tempdir().expect("tempdir");
        let settings = temp_settings(&dir);
        let first = StatusRecord {
            yesterday: "a".into(),
            today: "b".into(),
            ..StatusRecord::default()
        };
        let second = StatusRecord {
            yesterday: "b".into(),
            today: "c".into(),
            ..StatusRecord::default()
        };
        persist(&settings, &first).expect("persist first");
        persist(&settings, &second).expect("persist second");
        assert_eq!(load_previous(&settings).expect("load"), second);
    }

    #[test]
    fn persist_into_missing_directory_fails_softly() {
        let dir = tempdir().expect("tempdir");
        let settings = Settings::with_state_path(dir.path().join("no-such-dir").join(".standup"));
        match persist(&settings, &StatusRecord::default()) {
            Err(StandupError::Persist(_)) => {}
            other => panic!("expected Persist, got {other:?}"),
        }
    }
}
