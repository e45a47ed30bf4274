use std::fmt;

use prettytable::Table;

use crate::data::Entry;
use crate::errors::*;
use crate::form::EntryForm;
use crate::shelf::Shelf;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Add(EntryForm),
    Search(String),
    List,
    Show(u32),
    Finish(u32),
    Nil,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Command::Add(ref form) => write!(f, "Add {} '{}'", form.kind, form.title),
            Command::Search(ref query) => write!(f, "Search with query '{}'", query),
            Command::List => write!(f, "List entries"),
            Command::Show(id) => write!(f, "Show entry #{}", id),
            Command::Finish(id) => write!(f, "Finish entry #{}", id),
            Command::Nil => write!(f, "Nil command for implementation reasons"),
        }
    }
}

pub fn exec_command(shelf: &mut Shelf, command: Command) -> Result<String> {
    debug!("Executing: {}", command);

    match command {
        Command::Add(form) => do_add(shelf, form),
        Command::List => do_list(shelf),
        Command::Search(ref term) => do_search(shelf, term),
        Command::Show(id) => do_show(shelf, id),
        Command::Finish(id) => do_finish(shelf, id),
        Command::Nil => Ok(String::new()),
    }
}

fn do_add(shelf: &mut Shelf, form: EntryForm) -> Result<String> {
    let kind = form.kind;
    let title = form.title.clone();
    let id = shelf.add(form)?;

    Ok(format!("Successfully added {} '{}' as entry {}", kind, title, id))
}

fn do_list(shelf: &Shelf) -> Result<String> {
    let n = print_entries(shelf.store().iter());

    Ok(format!("{} entries", n))
}

fn do_search(shelf: &Shelf, term: &str) -> Result<String> {
    let n = print_entries(shelf.search(term));

    Ok(format!("Found {} result(s)", n))
}

fn do_show(shelf: &Shelf, id: u32) -> Result<String> {
    let entry = shelf.get(id)?;

    detail_table(entry).printstd();

    Ok(entry.title.clone())
}

fn do_finish(shelf: &mut Shelf, id: u32) -> Result<String> {
    shelf.finish(id)?;

    Ok(format!("Entry {} marked as finished", id))
}

fn print_entries<'a, I>(entries: I) -> u32
where
    I: IntoIterator<Item = (u32, &'a Entry)>,
{
    let (table, n) = list_table(entries);

    table.printstd();

    n
}

fn list_table<'a, I>(entries: I) -> (Table, u32)
where
    I: IntoIterator<Item = (u32, &'a Entry)>,
{
    let mut table = Table::new();
    table.add_row(row!["ID", "TITLE", "TYPE", "GENRE", "RATING", "STATUS"]);

    let mut n = 0;

    for (id, entry) in entries {
        n += 1;

        table.add_row(row![
            &id.to_string(),
            &entry.title,
            &entry.kind.to_string(),
            &entry.genre,
            &entry.rating.to_string(),
            entry.status()
        ]);
    }

    (table, n)
}

fn detail_table(entry: &Entry) -> Table {
    let mut table = Table::new();

    table.add_row(row!["Title", &entry.title]);
    table.add_row(row!["Type", &entry.kind.to_string()]);
    table.add_row(row!["Genre", &entry.genre]);
    table.add_row(row!["Description", &entry.description]);
    table.add_row(row!["Rating", &entry.rating.to_string()]);
    table.add_row(row!["Status", entry.status()]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Kind;
    use crate::persist::JsonFile;
    use tempfile::{tempdir, TempDir};

    fn form(title: &str, genre: &str, rating: i64, kind: Kind) -> EntryForm {
        EntryForm {
            title: title.into(),
            genre: genre.into(),
            description: format!("{} description", title),
            rating,
            kind,
        }
    }

    fn shelf() -> (TempDir, Shelf) {
        let dir = tempdir().unwrap();
        let shelf = Shelf::open(JsonFile::new(dir.path().join("entries.json"))).unwrap();
        (dir, shelf)
    }

    #[test]
    fn add_reports_new_id() {
        let (_dir, mut shelf) = shelf();

        let msg = exec_command(&mut shelf, Command::Add(form("Dune", "Sci-Fi", 9, Kind::Book)))
            .unwrap();
        assert_eq!(msg, "Successfully added book 'Dune' as entry 1");

        let msg = exec_command(&mut shelf, Command::Add(form("Heat", "Crime", 8, Kind::Movie)))
            .unwrap();
        assert_eq!(msg, "Successfully added movie 'Heat' as entry 2");
    }

    #[test]
    fn add_rejects_empty_title() {
        let (_dir, mut shelf) = shelf();

        let err = exec_command(&mut shelf, Command::Add(form("", "Action", 3, Kind::Movie)))
            .unwrap_err();

        assert_eq!(err.to_string(), "Field `title` must not be empty");
        assert!(shelf.entries().is_empty());
    }

    #[test]
    fn list_and_search_count_rows() {
        let (_dir, mut shelf) = shelf();
        shelf.add(form("Dune", "Sci-Fi", 9, Kind::Book)).unwrap();
        shelf.add(form("Alien", "Sci-Fi", 8, Kind::Movie)).unwrap();
        shelf.add(form("Emma", "Romance", 6, Kind::Book)).unwrap();

        assert_eq!(exec_command(&mut shelf, Command::List).unwrap(), "3 entries");
        assert_eq!(
            exec_command(&mut shelf, Command::Search("sci-fi".into())).unwrap(),
            "Found 2 result(s)"
        );
    }

    #[test]
    fn show_and_finish() {
        let (_dir, mut shelf) = shelf();
        shelf.add(form("Dune", "Sci-Fi", 9, Kind::Book)).unwrap();

        assert_eq!(exec_command(&mut shelf, Command::Show(1)).unwrap(), "Dune");
        assert_eq!(
            exec_command(&mut shelf, Command::Finish(1)).unwrap(),
            "Entry 1 marked as finished"
        );
        assert!(shelf.get(1).unwrap().is_finished);

        let err = exec_command(&mut shelf, Command::Show(4)).unwrap_err();
        assert_eq!(err.to_string(), "No entry with id `4`");
    }

    #[test]
    fn tables_render_fields() {
        let (_dir, mut shelf) = shelf();
        shelf.add(form("Dune", "Sci-Fi", 9, Kind::Book)).unwrap();

        let (table, n) = list_table(shelf.store().iter());
        let listing = table.to_string();
        assert_eq!(n, 1);
        assert!(listing.contains("Dune"));
        assert!(listing.contains("9/10"));
        assert!(listing.contains("in progress"));

        let detail = detail_table(shelf.get(1).unwrap()).to_string();
        assert!(detail.contains("Dune description"));
        assert!(detail.contains("book"));
    }

    #[test]
    fn display_describes_command() {
        assert_eq!(Command::Finish(3).to_string(), "Finish entry #3");
        assert_eq!(
            Command::Add(form("Dune", "Sci-Fi", 9, Kind::Book)).to_string(),
            "Add book 'Dune'"
        );
    }
}
