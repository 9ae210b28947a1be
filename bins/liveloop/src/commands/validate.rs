//! `liveloop validate` — portrait pre-flight check.

use anyhow::Result;
use liveloop_cli::output::Status;
use liveloop_image::validate_file;
use std::path::Path;

pub fn run(path: &Path, json: bool) -> Result<()> {
    let portrait = validate_file(path)?;

    if json {
        let summary = serde_json::json!({
            "kind": portrait.kind,
            "mime": portrait.kind.mime_type(),
            "width": portrait.width,
            "height": portrait.height,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        Status::success(&format!(
            "{} is a usable portrait: {}x{} {}",
            path.display(),
            portrait.width,
            portrait.height,
            portrait.kind.mime_type()
        ));
    }

    Ok(())
}
