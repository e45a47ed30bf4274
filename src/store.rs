use crate::data::Entry;
use crate::errors::*;

/// Entries in the order they were added.
///
/// Ids are 1-based positions, stable because entries are never removed.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct RecordStore {
    entries: Vec<Entry>,
}

impl RecordStore {
    pub fn new() -> RecordStore {
        RecordStore::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> RecordStore {
        RecordStore { entries }
    }

    /// Returns the id of the new entry.
    pub fn append(&mut self, entry: Entry) -> u32 {
        self.entries.push(entry);
        self.entries.len() as u32
    }

    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u32) -> Result<&Entry> {
        id.checked_sub(1)
            .and_then(|idx| self.entries.get(idx as usize))
            .ok_or_else(|| ErrorKind::NoSuchEntry(id).into())
    }

    /// Returns whether the entry was unfinished before.
    pub fn mark_finished(&mut self, id: u32) -> Result<bool> {
        let entry = id
            .checked_sub(1)
            .and_then(|idx| self.entries.get_mut(idx as usize))
            .ok_or_else(|| Error::from(ErrorKind::NoSuchEntry(id)))?;

        let changed = !entry.is_finished;
        entry.is_finished = true;

        Ok(changed)
    }

    pub fn search<'a>(&'a self, term: &str) -> Vec<(u32, &'a Entry)> {
        self.iter().filter(|&(_, entry)| entry.matches(term)).collect()
    }

    /// Entries paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (idx as u32 + 1, entry))
    }
}
