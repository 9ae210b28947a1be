//! CLI surface tests for the liveloop binary.

use assert_cmd::Command;
use image::{DynamicImage, ImageOutputFormat};
use predicates::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let img = DynamicImage::new_rgb8(width, height);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageOutputFormat::Png).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, buf.into_inner()).unwrap();
    path
}

fn liveloop() -> Command {
    let mut cmd = Command::cargo_bin("liveloop").unwrap();
    cmd.env_remove("SEGMIND_API_KEY")
        .env_remove("LIVELOOP_API_KEY")
        .env_remove("LIVELOOP_API_URL");
    cmd
}

#[test]
fn validate_accepts_valid_portrait() {
    let dir = TempDir::new().unwrap();
    let portrait = write_png(dir.path(), "ok.png", 300, 300);

    liveloop()
        .args(["validate"])
        .arg(&portrait)
        .assert()
        .success()
        .stdout(predicate::str::contains("300x300 image/png"));
}

#[test]
fn validate_json_reports_dimensions() {
    let dir = TempDir::new().unwrap();
    let portrait = write_png(dir.path(), "ok.png", 512, 256);

    liveloop()
        .args(["validate", "--json"])
        .arg(&portrait)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 512"))
        .stdout(predicate::str::contains("\"mime\": \"image/png\""));
}

#[test]
fn validate_rejects_small_image() {
    let dir = TempDir::new().unwrap();
    let tiny = write_png(dir.path(), "tiny.png", 100, 100);

    liveloop()
        .args(["validate"])
        .arg(&tiny)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 256x256"));
}

#[test]
fn validate_rejects_non_image() {
    let dir = TempDir::new().unwrap();
    let text = dir.path().join("note.txt");
    std::fs::write(&text, "not pixels").unwrap();

    liveloop()
        .args(["validate"])
        .arg(&text)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JPEG or PNG"));
}

#[test]
fn generate_without_credential_fails_fast() {
    let dir = TempDir::new().unwrap();
    let portrait = write_png(dir.path(), "ok.png", 300, 300);

    liveloop()
        .env("LIVELOOP_DATA_DIR", dir.path())
        .args(["generate"])
        .arg(&portrait)
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn gallery_list_empty() {
    let dir = TempDir::new().unwrap();

    liveloop()
        .env("LIVELOOP_DATA_DIR", dir.path())
        .args(["gallery", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gallery is empty"));
}

#[test]
fn gallery_delete_missing_id_is_ok() {
    let dir = TempDir::new().unwrap();

    liveloop()
        .env("LIVELOOP_DATA_DIR", dir.path())
        .args(["gallery", "delete", "12345"])
        .assert()
        .success();
}

#[test]
fn gallery_export_missing_id_fails() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("out.mp4");

    liveloop()
        .env("LIVELOOP_DATA_DIR", dir.path())
        .args(["gallery", "export", "12345"])
        .arg(&dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No gallery entry"));
}
