use std::io::{BufRead, Write};

use log::debug;

use crate::config::WriterConfig;
use crate::console::Console;
use crate::error::Result;
use crate::model::{ListStyle, Recipe};

/// Prompts for a recipe's name, ingredients, directions and optional notes
pub fn read_recipe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &WriterConfig,
) -> Result<Recipe> {
    console.say("Creating new recipe")?;

    console.prompt("Name: ")?;
    let name = console.read_nonblank_line(config.name_max)?;
    console.say("")?;

    console.say("After entering the last ingredient, hit enter twice to finish with ingredients")?;
    console.say("Ingredients:")?;
    let ingredients = console.read_list(ListStyle::Unordered, config.ingredient_max)?;
    console.say("")?;

    console.say("After entering the last direction, hit enter twice to finish with directions")?;
    console.say("Directions:")?;
    let directions = console.read_list(ListStyle::Ordered, config.direction_max)?;
    console.say("")?;

    let wants_notes =
        console.ask_yes_no("Would you like to add any notes? [Y/n]", config.answer_max)?;
    let notes = if wants_notes {
        console.say("Notes:")?;
        console.read_list(ListStyle::Unordered, config.note_max)?
    } else {
        Vec::new()
    };
    console.say("")?;

    debug!(
        "read recipe {:?}: {} ingredients, {} directions, {} notes",
        name,
        ingredients.len(),
        directions.len(),
        notes.len()
    );

    Ok(Recipe {
        name,
        ingredients,
        directions,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WriterError;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Recipe> {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), &mut out);
        read_recipe(&mut console, &WriterConfig::default())
    }

    #[test]
    fn test_read_full_recipe() {
        let recipe = read("Pancakes\n2 eggs\nflour\n\nWhisk\nFry\n\ny\nServe warm\n\n").unwrap();

        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.ingredients, vec!["2 eggs", "flour"]);
        assert_eq!(recipe.directions, vec!["Whisk", "Fry"]);
        assert_eq!(recipe.notes, vec!["Serve warm"]);
    }

    #[test]
    fn test_blank_names_are_asked_again() {
        let recipe = read("\n\nSoup\n\n\nn\n").unwrap();
        assert_eq!(recipe.name, "Soup");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.directions.is_empty());
        assert!(recipe.notes.is_empty());
    }

    #[test]
    fn test_declining_notes() {
        let recipe = read("Toast\nbread\n\nToast it\n\nno\n").unwrap();
        assert!(recipe.notes.is_empty());
    }

    #[test]
    fn test_notes_question_repeats_on_blank() {
        let recipe = read("Toast\n\n\n\n\nN\n").unwrap();
        assert!(recipe.notes.is_empty());
    }

    #[test]
    fn test_input_closed_before_name() {
        assert!(matches!(read(""), Err(WriterError::InputClosed)));
    }

    #[test]
    fn test_prompts_are_written() {
        let mut out = Vec::new();
        let input = Cursor::new(b"Soup\nwater\n\nboil\n\nn\n".to_vec());
        let mut console = Console::new(input, &mut out);
        read_recipe(&mut console, &WriterConfig::default()).unwrap();
        drop(console);

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Creating new recipe\nName: \n"));
        assert!(output.contains("Ingredients:\n  -   - \n"));
        assert!(output.contains("Directions:\n  1.   2. \n"));
        assert!(output.contains("Would you like to add any notes? [Y/n]\n"));
        assert!(!output.contains("Notes:"));
    }
}
