mod machine;
mod state;

pub use machine::RecordingMachine;
pub use state::RecordingState;
