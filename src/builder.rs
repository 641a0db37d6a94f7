use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::WriterConfig;
use crate::console::Console;
use crate::{assembler, session, writer, Recipe, Result};

/// Builder for configuring a [`RecipeWriter`]
#[derive(Debug, Default)]
pub struct RecipeWriterBuilder {
    config: WriterConfig,
}

impl RecipeWriterBuilder {
    /// Replace the whole configuration
    ///
    /// # Example
    /// ```
    /// use recipe_writer::{RecipeWriter, WriterConfig};
    ///
    /// let writer = RecipeWriter::builder()
    ///     .config(WriterConfig::default())
    ///     .build();
    /// ```
    pub fn config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the directory recipe files are created in
    ///
    /// # Example
    /// ```
    /// use recipe_writer::RecipeWriter;
    ///
    /// let writer = RecipeWriter::builder()
    ///     .output_dir("recipes")
    ///     .build();
    /// assert_eq!(writer.config().output_dir, std::path::PathBuf::from("recipes"));
    /// ```
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the maximum length of synthesized file names
    pub fn filename_max(mut self, max: usize) -> Self {
        self.config.filename_max = max;
        self
    }

    pub fn build(self) -> RecipeWriter {
        RecipeWriter {
            config: self.config,
        }
    }
}

/// Interactive recipe writer bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct RecipeWriter {
    config: WriterConfig,
}

impl RecipeWriter {
    /// Creates a new builder with default configuration
    pub fn builder() -> RecipeWriterBuilder {
        RecipeWriterBuilder::default()
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Runs the prompt loop over `input` and `output` until the user stops.
    ///
    /// # Example
    /// ```no_run
    /// use recipe_writer::RecipeWriter;
    ///
    /// let stdin = std::io::stdin();
    /// let written = RecipeWriter::builder()
    ///     .build()
    ///     .run_session(stdin.lock(), std::io::stdout())?;
    /// println!("{} recipes written", written.len());
    /// # Ok::<(), recipe_writer::WriterError>(())
    /// ```
    pub fn run_session<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<Vec<PathBuf>> {
        let mut console = Console::new(input, output);
        session::run_session(&mut console, &self.config)
    }

    /// Prompts for a single recipe
    pub fn read_recipe<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Recipe> {
        assembler::read_recipe(console, &self.config)
    }

    /// Writes `recipe` to a new file, asking for another name on collision
    pub fn write_recipe<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        recipe: &Recipe,
    ) -> Result<PathBuf> {
        writer::write_recipe(console, recipe, &self.config)
    }
}
