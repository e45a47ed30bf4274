use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use xdg::BaseDirectories;

use crate::errors::*;

pub const NAME: &str = "shelve";
pub const DATA_FILE: &str = "entries.json";
pub const FILE_ENV: &str = "SHELVE_FILE";

/// Where the entry list lives: `--file`, then `$SHELVE_FILE`, then the XDG data dir.
pub fn data_file(flag: Option<&str>) -> Result<PathBuf> {
    match explicit_file(flag, env::var_os(FILE_ENV)) {
        Some(path) => Ok(path),
        None => {
            let bd = BaseDirectories::with_prefix(NAME)?;
            Ok(bd.place_data_file(DATA_FILE)?)
        }
    }
}

fn explicit_file(flag: Option<&str>, env: Option<OsString>) -> Option<PathBuf> {
    flag.filter(|f| !f.is_empty())
        .map(PathBuf::from)
        .or_else(|| env.filter(|e| !e.is_empty()).map(PathBuf::from))
}
