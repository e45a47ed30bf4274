use crate::data::{Entry, Kind, Rating};
use crate::errors::*;

/// Raw input for a new entry, as collected by whatever front end is in use.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EntryForm {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub rating: i64,
    pub kind: Kind,
}

impl EntryForm {
    /// Validates the form and builds an unfinished entry from it.
    ///
    /// Text is kept as typed; a field holding only whitespace counts as empty.
    pub fn submit(self) -> Result<Entry> {
        let fields = [
            ("title", &self.title),
            ("genre", &self.genre),
            ("description", &self.description),
        ];

        if let Some(&(name, _)) = fields.iter().find(|&&(_, value)| value.trim().is_empty()) {
            return Err(ErrorKind::EmptyField(name).into());
        }

        let rating = Rating::new(self.rating)?;

        Ok(Entry {
            title: self.title,
            genre: self.genre,
            description: self.description,
            rating,
            kind: self.kind,
            is_finished: false,
        })
    }
}
