//! Keep track of the movies and books you are into.
//!
//! Entries are held in a [`RecordStore`](store/struct.RecordStore.html) and
//! written as one JSON array by [`JsonFile`](persist/struct.JsonFile.html) after
//! every change. [`Shelf`](shelf/struct.Shelf.html) ties the two together.

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate prettytable;

pub mod commands;
pub mod config;
pub mod data;
pub mod errors;
pub mod form;
pub mod persist;
pub mod shelf;
pub mod store;

pub use crate::data::{Entry, Kind, Rating};
pub use crate::form::EntryForm;
pub use crate::persist::JsonFile;
pub use crate::shelf::Shelf;
pub use crate::store::RecordStore;
