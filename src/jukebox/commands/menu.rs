use crate::catalog::Catalog;
use crate::commands::CmdResult;

pub fn run(catalog: &Catalog) -> CmdResult {
    CmdResult::default().with_listed_songs(catalog.songs().to_vec())
}
