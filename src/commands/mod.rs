//! Command parsing and dispatch.
//!
//! Parsing, routing and execution are separate steps so each can be tested
//! without a terminal attached.

pub mod definitions;
pub mod handlers;
pub mod interpreter;
pub mod output;
pub mod pipeline;
pub mod router;

pub use definitions::{autocomplete_command, CommandCategory, CommandDef, CommandRegistry, COMMANDS};
pub use handlers::CommandContext;
pub use interpreter::Interpreter;
pub use output::{CommandOutput, ControlAction, OutputStyle};
pub use pipeline::{parse_pipeline, split_args};
pub use router::{Command, CommandRouter};
