use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::WriterConfig;
use crate::console::Console;
use crate::error::{Result, WriterError};
use crate::filename::synthesize_filename;
use crate::markdown::write_markdown;
use crate::model::Recipe;

/// Creates `path`, failing with `AlreadyExists` rather than overwriting
fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// Writes `recipe` to a new Markdown file in the configured output directory.
///
/// The file name comes from the recipe name. While the chosen name is
/// already taken, the user is asked for another one; existing files are
/// never overwritten. Returns the path of the file that was written.
///
/// # Errors
/// Returns `WriterError` if:
/// - The file cannot be created for any reason other than already existing
/// - Writing the content fails
/// - The console fails or input ends while asking for a new name
pub fn write_recipe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    recipe: &Recipe,
    config: &WriterConfig,
) -> Result<PathBuf> {
    let mut filename = synthesize_filename(&recipe.name, config.filename_max);
    console.say(&format!(
        "Writing recipe for {} to file '{}'",
        recipe.name, filename
    ))?;

    let (file, path) = loop {
        let path = config.output_dir.join(&filename);
        match create_new(&path) {
            Ok(file) => break (file, path),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!("{} already exists", path.display());
                console.prompt(&format!(
                    "File {} already exists, please choose a different name: ",
                    filename
                ))?;
                let replacement = console.read_nonblank_line(config.name_max)?;
                filename = synthesize_filename(&replacement, config.filename_max);
                debug!("trying replacement file name {}", filename);
            }
            Err(source) => {
                return Err(WriterError::FileCreate {
                    recipe: recipe.name.clone(),
                    path,
                    source,
                })
            }
        }
    };

    let mut out = BufWriter::new(file);
    write_markdown(&mut out, recipe)
        .and_then(|_| out.flush())
        .map_err(|source| WriterError::FileWrite {
            recipe: recipe.name.clone(),
            path: path.clone(),
            source,
        })?;

    info!("Wrote recipe '{}' to {}", recipe.name, path.display());
    console.say(&format!(
        "Done writing {} recipe to file '{}'",
        recipe.name, filename
    ))?;
    console.say("")?;

    Ok(path)
}
