//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod html;
mod show;
mod url;

pub use check::run_check;
pub use completions::run_completions;
pub use html::run_html;
pub use show::run_show;
pub use url::run_url;
