// Round engine: prompt generation and the per-session state machine

pub mod prompt;
pub mod session;

pub use session::{PassOutcome, Phase, Session, Submission, MAX_PASSES, ROUND_DURATION_SECS};
