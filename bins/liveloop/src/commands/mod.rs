//! Subcommand implementations.

pub mod convert;
pub mod gallery;
pub mod generate;
pub mod validate;

use liveloop_core::gallery::StoreKind;

/// Resolve the `--gifs` flag to a gallery store.
pub fn store_kind(gifs: bool) -> StoreKind {
    if gifs {
        StoreKind::Gifs
    } else {
        StoreKind::Videos
    }
}
