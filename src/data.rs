use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::*;

pub const MAX_RATING: u8 = 10;

/// A score between 0 and 10 inclusive.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(rating: i64) -> Result<Rating> {
        if rating < 0 || rating > i64::from(MAX_RATING) {
            return Err(ErrorKind::BadRating(rating).into());
        }

        Ok(Rating(rating as u8))
    }

    /// Saturates at the bounds, the way a 0..=10 slider does.
    pub fn clamped(rating: i64) -> Rating {
        Rating(rating.max(0).min(i64::from(MAX_RATING)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(rating: i64) -> Result<Rating> {
        Rating::new(rating)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_RATING)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Movie,
    Book,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Kind::Movie => write!(f, "movie"),
            Kind::Book => write!(f, "book"),
        }
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Kind> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(Kind::Movie),
            "book" => Ok(Kind::Book),
            _ => Err(ErrorKind::BadKind(s.into()).into()),
        }
    }
}

/// One movie or book on the shelf.
///
/// Field names follow the on-disk layout: `type` and `isFinished`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub rating: Rating,
    #[serde(rename = "type")]
    pub kind: Kind,
    #[serde(default)]
    pub is_finished: bool,
}

impl Entry {
    pub fn status(&self) -> &'static str {
        if self.is_finished {
            "finished"
        } else {
            "in progress"
        }
    }

    /// Case-insensitive match on title, genre and description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        [&self.title, &self.genre, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dune() -> Entry {
        Entry {
            title: "Dune".into(),
            genre: "Sci-Fi".into(),
            description: "Desert planet".into(),
            rating: Rating::new(9).unwrap(),
            kind: Kind::Book,
            is_finished: false,
        }
    }

    #[test]
    fn rating_accepts_bounds() {
        assert_eq!(Rating::new(0).unwrap().value(), 0);
        assert_eq!(Rating::new(10).unwrap().value(), 10);
    }

    #[test]
    fn rating_rejects_out_of_range() {
        match *Rating::new(11).unwrap_err().kind() {
            ErrorKind::BadRating(11) => {}
            ref other => panic!("unexpected error: {}", other),
        }
        assert!(Rating::new(-1).is_err());
    }

    #[test]
    fn clamped_rating_saturates() {
        assert_eq!(Rating::clamped(-1).value(), 0);
        assert_eq!(Rating::clamped(11).value(), 10);
        assert_eq!(Rating::clamped(7).value(), 7);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Book".parse::<Kind>().unwrap(), Kind::Book);
        assert_eq!("movie".parse::<Kind>().unwrap(), Kind::Movie);
        assert!("album".parse::<Kind>().is_err());
    }

    #[test]
    fn serializes_with_file_field_names() {
        let value = serde_json::to_value(&dune()).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Dune",
                "genre": "Sci-Fi",
                "description": "Desert planet",
                "rating": 9,
                "type": "book",
                "isFinished": false
            })
        );
    }

    #[test]
    fn missing_is_finished_defaults_to_false() {
        let raw = r#"{"title":"Heat","genre":"Crime","description":"LA heist",
                      "rating":8,"type":"movie"}"#;
        let entry: Entry = serde_json::from_str(raw).unwrap();

        assert!(!entry.is_finished);
        assert_eq!(entry.kind, Kind::Movie);
    }

    #[test]
    fn rejects_out_of_range_rating_in_json() {
        let raw = r#"{"title":"Heat","genre":"Crime","description":"LA heist",
                      "rating":11,"type":"movie","isFinished":false}"#;

        assert!(serde_json::from_str::<Entry>(raw).is_err());
    }

    #[test]
    fn rejects_missing_field_in_json() {
        let raw = r#"{"title":"Heat","genre":"Crime","rating":8,"type":"movie"}"#;

        assert!(serde_json::from_str::<Entry>(raw).is_err());
    }

    #[test]
    fn status_follows_finished_flag() {
        let mut entry = dune();
        assert_eq!(entry.status(), "in progress");

        entry.is_finished = true;
        assert_eq!(entry.status(), "finished");
    }

    #[test]
    fn matches_any_text_field() {
        let entry = dune();

        assert!(entry.matches("dune"));
        assert!(entry.matches("SCI"));
        assert!(entry.matches("planet"));
        assert!(!entry.matches("ocean"));
    }
}
