use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::debug;

use crate::assembler::read_recipe;
use crate::config::WriterConfig;
use crate::console::Console;
use crate::error::{Result, WriterError};
use crate::writer::write_recipe;

/// Version reported in the welcome banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collects and writes recipes until the user declines to add another.
///
/// Running out of input at the "another recipe" question ends the session
/// like answering no. Returns the paths of the files written, in order.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &WriterConfig,
) -> Result<Vec<PathBuf>> {
    console.say(&format!("Welcome to recipe writer! (v{})", VERSION))?;
    console.say("")?;

    let mut written = Vec::new();
    loop {
        let recipe = read_recipe(console, config)?;
        written.push(write_recipe(console, &recipe, config)?);

        let another =
            console.ask_yes_no("Would you like to add another recipe? [Y/n]", config.answer_max);
        match another {
            Ok(true) => {}
            Ok(false) => break,
            Err(WriterError::InputClosed) => {
                debug!("input closed, ending session");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    console.say("Goodbye!")?;
    Ok(written)
}
