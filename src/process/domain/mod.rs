//! Domain values for running the external tool.

mod invocation;
mod output;
mod search_path;

pub use invocation::{ToolInvocation, repeated_flag};
pub use output::ToolOutput;
pub use search_path::SearchPath;
