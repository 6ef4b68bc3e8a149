// Entrypoint for the standup CLI.
// - Keeps `main` small: parse flags, resolve settings, hand off to the
//   pipeline in `ui::run`.
// - Returns `anyhow::Result` so any pipeline error exits non-zero with its
//   message.

use clap::Parser;
use standup_cli::{cli::Args, ui};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.settings();
    let sink = args.sink();
    let given = args.presupplied();

    ui::run(&settings, &given, &sink, &mut ui::TerminalPrompts)?;
    Ok(())
}
