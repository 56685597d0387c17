//! Game session and round loop

mod play;
mod session;

pub use play::{
    Event, LineSource, Outcome, ReaderLines, RecordingReporter, Reporter, ScriptedLines, play,
};
pub use session::{Rejection, Session, SessionError, SessionState, Turn};
