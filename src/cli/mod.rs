pub mod action;
pub mod input;
pub mod output;
pub mod prompts;
mod shell;

pub use action::Action;
pub use input::{LineSource, ReadlineInput, ScriptInput};
pub use output::Output;
pub use shell::{run_cli, InteractionLoop, LoopState};
