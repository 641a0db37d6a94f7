pub mod assembler;
pub mod builder;
pub mod config;
pub mod console;
pub mod error;
pub mod filename;
pub mod markdown;
pub mod model;
pub mod session;
pub mod writer;

pub use builder::{RecipeWriter, RecipeWriterBuilder};
pub use config::WriterConfig;
pub use console::Console;
pub use error::{Result, WriterError};
pub use filename::synthesize_filename;
pub use markdown::to_markdown;
pub use model::{ListStyle, Recipe};
pub use session::VERSION;

use std::io;

/// Runs an interactive session on the process's stdin and stdout
pub fn run_stdio(config: WriterConfig) -> Result<Vec<std::path::PathBuf>> {
    let stdin = io::stdin();
    RecipeWriter::builder()
        .config(config)
        .build()
        .run_session(stdin.lock(), io::stdout())
}
