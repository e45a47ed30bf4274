use crate::data::Entry;
use crate::errors::*;
use crate::form::EntryForm;
use crate::persist::JsonFile;
use crate::store::RecordStore;

/// A record store bound to the file it is persisted in.
///
/// Every mutation is followed by a full rewrite of the file.
#[derive(Debug)]
pub struct Shelf {
    store: RecordStore,
    file: JsonFile,
    recovered: Option<Error>,
}

impl Shelf {
    /// Loads the shelf from `file`.
    ///
    /// A corrupt file is replaced by an empty shelf and the decode error is
    /// kept in [`recovered_from`](#method.recovered_from). The file itself is
    /// only overwritten by the next save.
    pub fn open(file: JsonFile) -> Result<Shelf> {
        let (entries, recovered) = match file.load() {
            Ok(entries) => (entries, None),
            Err(e) => {
                if !e.kind().is_corrupt_store() {
                    return Err(e);
                }

                warn!("{}, starting empty", e);
                (Vec::new(), Some(e))
            }
        };

        Ok(Shelf {
            store: RecordStore::from_entries(entries),
            file,
            recovered,
        })
    }

    /// The `CorruptStore` error, if `open` had to start from an empty shelf.
    pub fn recovered_from(&self) -> Option<&Error> {
        self.recovered.as_ref()
    }

    /// Validates `form`, appends the entry and saves. Returns the new id.
    ///
    /// If saving fails the entry stays in memory and the error is returned.
    pub fn add(&mut self, form: EntryForm) -> Result<u32> {
        let entry = form.submit()?;
        let id = self.store.append(entry);

        self.save()?;

        Ok(id)
    }

    pub fn finish(&mut self, id: u32) -> Result<()> {
        if self.store.mark_finished(id)? {
            self.save()?;
        }

        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.all()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn get(&self, id: u32) -> Result<&Entry> {
        self.store.get(id)
    }

    pub fn search(&self, term: &str) -> Vec<(u32, &Entry)> {
        self.store.search(term)
    }

    fn save(&self) -> Result<()> {
        self.file.save(self.store.all())
    }
}
