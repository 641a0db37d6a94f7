use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Input limits and output location for the recipe writer
///
/// Every limit is a soft cap on the number of characters kept from one
/// line of input. Longer lines are cut at the cap and the rest of the line
/// is discarded.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Maximum length of a yes/no answer
    #[serde(default = "default_answer_max")]
    pub answer_max: usize,
    /// Maximum length of a recipe name (also used for replacement file names)
    #[serde(default = "default_name_max")]
    pub name_max: usize,
    /// Maximum length of one ingredient
    #[serde(default = "default_ingredient_max")]
    pub ingredient_max: usize,
    /// Maximum length of one direction
    #[serde(default = "default_direction_max")]
    pub direction_max: usize,
    /// Maximum length of one note
    #[serde(default = "default_note_max")]
    pub note_max: usize,
    /// Maximum length of a synthesized file name, counting the extension
    /// and one terminator slot
    #[serde(default = "default_filename_max")]
    pub filename_max: usize,
    /// Directory recipe files are created in
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            answer_max: default_answer_max(),
            name_max: default_name_max(),
            ingredient_max: default_ingredient_max(),
            direction_max: default_direction_max(),
            note_max: default_note_max(),
            filename_max: default_filename_max(),
            output_dir: default_output_dir(),
        }
    }
}

// Default value functions
fn default_answer_max() -> usize {
    128
}

fn default_name_max() -> usize {
    128
}

fn default_ingredient_max() -> usize {
    128
}

fn default_direction_max() -> usize {
    1024
}

fn default_note_max() -> usize {
    1024
}

fn default_filename_max() -> usize {
    64
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl WriterConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_WRITER__ prefix
    /// 2. recipe_writer.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_WRITER__FILENAME_MAX
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`WriterConfig::load`] for the lookup order.
pub fn load_config() -> Result<WriterConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_writer").required(false))
        // Environment variables with RECIPE_WRITER__ prefix
        .add_source(
            Environment::with_prefix("RECIPE_WRITER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
