// Library root
// -----------
// This crate exposes a small library surface for the `standup` binary.
//
// Module responsibilities:
// - `cli`: flag parsing and conversion into presupplied answers.
// - `record`: the status record itself and the rendered message format.
// - `store`: settings (state-file path) plus load/save of the previous
//   run's answers.
// - `ui`: the `AnswerSource` prompting capability and the run pipeline.
// - `output`: the console/file sink the message is written to.
// - `error`: the error kinds the pipeline can surface.
//
// Keeping the pipeline in the library (rather than in `main`) lets tests
// drive a full run with scripted answers and temp paths.
pub mod cli;
pub mod error;
pub mod output;
pub mod record;
pub mod store;
pub mod ui;
