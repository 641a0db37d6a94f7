use std::io::{self, Write};

use crate::model::{ListStyle, Recipe};

fn push_section(doc: &mut String, heading: &str, entries: &[String], style: ListStyle) {
    doc.push_str("### ");
    doc.push_str(heading);
    doc.push('\n');
    for (index, entry) in entries.iter().enumerate() {
        doc.push_str("  ");
        doc.push_str(&style.marker(index));
        doc.push(' ');
        doc.push_str(entry);
        doc.push('\n');
    }
}

/// Renders `recipe` as a Markdown document.
///
/// The Ingredients and Directions headings are always present. The Notes
/// section is left out when there are no notes.
pub fn to_markdown(recipe: &Recipe) -> String {
    let mut doc = String::new();
    doc.push_str("## ");
    doc.push_str(&recipe.name);
    doc.push_str("\n\n");

    push_section(&mut doc, "Ingredients", &recipe.ingredients, ListStyle::Unordered);
    doc.push('\n');

    push_section(&mut doc, "Directions", &recipe.directions, ListStyle::Ordered);

    if !recipe.notes.is_empty() {
        doc.push('\n');
        push_section(&mut doc, "Notes", &recipe.notes, ListStyle::Unordered);
    }

    doc
}

/// Writes the Markdown rendering of `recipe` to `out`
pub fn write_markdown<W: Write>(out: &mut W, recipe: &Recipe) -> io::Result<()> {
    out.write_all(to_markdown(recipe).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_recipe() {
        let recipe = Recipe {
            name: "Pancakes".to_string(),
            ingredients: strings(&["2 eggs", "1 cup flour"]),
            directions: strings(&["Whisk", "Fry"]),
            notes: strings(&["Serve warm"]),
        };

        assert_eq!(
            to_markdown(&recipe),
            "## Pancakes\n\
             \n\
             ### Ingredients\n\
             \x20 - 2 eggs\n\
             \x20 - 1 cup flour\n\
             \n\
             ### Directions\n\
             \x20 1. Whisk\n\
             \x20 2. Fry\n\
             \n\
             ### Notes\n\
             \x20 - Serve warm\n"
        );
    }

    #[test]
    fn test_notes_section_omitted_without_notes() {
        let recipe = Recipe {
            name: "Toast".to_string(),
            ingredients: strings(&["bread"]),
            directions: strings(&["Toast it"]),
            notes: Vec::new(),
        };

        let markdown = to_markdown(&recipe);
        assert!(!markdown.contains("### Notes"));
        assert!(markdown.ends_with("### Directions\n  1. Toast it\n"));
    }

    #[test]
    fn test_empty_lists_keep_headings() {
        let recipe = Recipe {
            name: "Water".to_string(),
            ..Default::default()
        };

        assert_eq!(
            to_markdown(&recipe),
            "## Water\n\n### Ingredients\n\n### Directions\n"
        );
    }

    #[test]
    fn test_directions_numbered_consecutively() {
        let directions: Vec<String> = (1..=12).map(|i| format!("step {i}")).collect();
        let recipe = Recipe {
            name: "Long".to_string(),
            directions,
            ..Default::default()
        };

        let markdown = to_markdown(&recipe);
        for i in 1..=12 {
            assert!(markdown.contains(&format!("  {i}. step {i}\n")));
        }
    }
}
