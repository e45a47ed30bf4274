use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

error_chain! {
    foreign_links {
        Io(io::Error);
        Json(serde_json::Error);
        ParseInt(ParseIntError);
        Xdg(xdg::BaseDirectoriesError);
    }

    errors {
        NoSuchEntry(id: u32) {
            description("Invalid entry id")
            display("No entry with id `{}`", id)
        }
        MissingArg(arg: &'static str) {
            description("Missing argument")
            display("Required argument `{}` is missing", arg)
        }
        EmptyField(field: &'static str) {
            description("Required field is empty")
            display("Field `{}` must not be empty", field)
        }
        UnreadableRating(raw: String) {
            description("Ratings must be integers between 0 and 10")
            display("Rating `{}` is not an integer between 0 and 10", raw)
        }
        BadRating(rating: i64) {
            description("Ratings must be integers between 0 and 10")
            display("Rating {} is not an integer between 0 and 10", rating)
        }
        BadKind(kind: String) {
            description("Entry type must be `movie` or `book`")
            display("Unknown entry type `{}`, expected `movie` or `book`", kind)
        }
        CorruptStore(path: PathBuf, reason: String) {
            description("Data file could not be decoded")
            display("Data file `{}` is corrupt: {}", path.display(), reason)
        }
        Persistence(path: PathBuf) {
            description("Data file could not be accessed")
            display("Could not access data file `{}`", path.display())
        }
    }
}

impl ErrorKind {
    /// Validation failures are the user's to fix; nothing was written.
    pub fn is_validation(&self) -> bool {
        match *self {
            ErrorKind::EmptyField(_)
            | ErrorKind::BadRating(_)
            | ErrorKind::UnreadableRating(_)
            | ErrorKind::BadKind(_) => true,
            _ => false,
        }
    }

    pub fn is_corrupt_store(&self) -> bool {
        match *self {
            ErrorKind::CorruptStore(..) => true,
            _ => false,
        }
    }
}
