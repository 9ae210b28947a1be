//! `liveloop gallery` — list, delete, and export saved results.

use anyhow::Result;
use liveloop_cli::output::{format_size, Status};
use liveloop_core::gallery::Gallery;
use std::path::Path;

pub fn list(gifs: bool, json: bool) -> Result<()> {
    let gallery = Gallery::open_default(super::store_kind(gifs))?;
    let entries = gallery.load()?;

    if json {
        let summaries: Vec<_> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id,
                    "createdAt": e.created_at,
                    "bytes": e.payload().map(|p| p.len()).unwrap_or(0),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if entries.is_empty() {
        Status::info("Gallery is empty");
        return Ok(());
    }

    Status::header(&format!("{} saved", entries.len()));
    for entry in &entries {
        let size = entry.payload().map(|p| p.len() as u64).unwrap_or(0);
        println!(
            "  {}  {}  {}",
            entry.id,
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            format_size(size)
        );
    }
    Ok(())
}

pub fn delete(id: u64, gifs: bool) -> Result<()> {
    let gallery = Gallery::open_default(super::store_kind(gifs))?;
    gallery.delete(id)?;
    Status::success(&format!("Deleted {id}"));
    Ok(())
}

pub fn export(id: u64, dest: &Path, gifs: bool) -> Result<()> {
    let gallery = Gallery::open_default(super::store_kind(gifs))?;
    let written = gallery.export(id, dest)?;
    Status::success(&format!(
        "Exported {} to {} ({})",
        id,
        dest.display(),
        format_size(written)
    ));
    Ok(())
}
