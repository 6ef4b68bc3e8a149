// Data shapes for a single standup update. `StatusRecord` is both the
// persisted format (JSON keys are stable, see `store`) and the input to the
// rendered message. `Presupplied` carries the flag-supplied subset of a
// record; any field present here suppresses its prompt.

use serde::{Deserialize, Serialize};

/// One day's status update. Field keys mirror the on-disk JSON; `default`
/// lets a state file written by an older build decode with the missing
/// fields empty/false instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusRecord {
    pub yesterday: String,
    pub today: String,
    pub blocked: bool,
    pub on_time: bool,
}

impl StatusRecord {
    /// Render the four-line standup message, one `<marker> <value>` line per
    /// field, booleans as "yes"/"no".
    pub fn render(&self) -> String {
        format!(
            ":yesterday: {}\n:today: {}\n:road-block: {}\n:on-time: {}\n",
            self.yesterday,
            self.today,
            yes_no(self.blocked),
            yes_no(self.on_time),
        )
    }
}

/// Values supplied up front (via flags) that satisfy a field without
/// prompting.
#[derive(Debug, Clone, Default)]
pub struct Presupplied {
    pub yesterday: Option<String>,
    pub today: Option<String>,
    pub blocked: Option<bool>,
    pub on_time: Option<bool>,
}

impl Presupplied {
    /// Both required text fields are covered, so no prompting is needed.
    pub fn covers_required(&self) -> bool {
        self.yesterday.is_some() && self.today.is_some()
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
