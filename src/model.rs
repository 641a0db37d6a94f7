/// A recipe collected from the console
///
/// `name` is never empty. Any of the lists may be empty when the user
/// finishes entry straight away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub notes: Vec<String>,
}

/// How the entries of a list are presented while prompting and in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// Bulleted with `-` (ingredients, notes)
    Unordered,
    /// Numbered from 1 (directions)
    Ordered,
}

impl ListStyle {
    /// Marker placed in front of the entry at `index` (zero based)
    pub fn marker(&self, index: usize) -> String {
        match self {
            ListStyle::Unordered => "-".to_string(),
            ListStyle::Ordered => format!("{}.", index + 1),
        }
    }
}
