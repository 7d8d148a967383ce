//! End-to-end checks against temporary public directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use check_pwa_resources::check::{check_public_dir, Level};

use tempfile::TempDir;

/// Public directory with an empty `screenshots/`, removed on drop.
struct TempPublicDir(TempDir);

impl TempPublicDir {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("screenshots")).unwrap();
        Self(dir)
    }

    fn path(&self) -> &Path {
        self.0.path()
    }

    fn write_png(&self, name: &str, width: u32, height: u32) {
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        fs::write(self.path().join(name), bytes).unwrap();
    }

    fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.path().join(name), contents).unwrap();
    }
}

fn run_binary(dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_check-pwa-resources"))
        .arg("--public-dir")
        .arg(dir)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn missing_small_icon_fails() {
    let public = TempPublicDir::new();
    public.write_png("pwa-512x512.png", 512, 512);

    let report = check_public_dir(public.path()).unwrap();
    assert!(!report.passed());
    let missing: Vec<_> = report.missing_required().iter().map(|r| r.spec.path).collect();
    assert_eq!(missing, vec!["pwa-192x192.png"]);

    let output = run_binary(public.path());
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Missing required: pwa-192x192.png"), "{stdout}");
}

#[test]
fn required_icons_present_passes_with_warnings() {
    let public = TempPublicDir::new();
    public.write_png("pwa-192x192.png", 192, 192);
    public.write_png("pwa-512x512.png", 512, 512);

    let report = check_public_dir(public.path()).unwrap();
    assert!(report.passed());
    // four optional files and four screenshots are absent
    assert_eq!(report.warnings(), 8);

    let output = run_binary(public.path());
    assert!(output.status.success());
}

#[test]
fn wrong_declared_size_fails() {
    let public = TempPublicDir::new();
    public.write_png("pwa-192x192.png", 180, 180);
    public.write_png("pwa-512x512.png", 512, 512);

    let report = check_public_dir(public.path()).unwrap();
    assert!(!report.passed());
    assert!(report.missing_required().is_empty());
    let icon = report.resources.iter().find(|r| r.spec.path == "pwa-192x192.png").unwrap();
    assert_eq!(icon.level, Level::Failure);

    assert!(!run_binary(public.path()).status.success());
}

#[test]
fn complete_directory_is_clean() {
    let public = TempPublicDir::new();
    public.write_png("pwa-192x192.png", 192, 192);
    public.write_png("pwa-512x512.png", 512, 512);
    public.write_png("apple-touch-icon.png", 180, 180);
    public.write_file("pwa-icon.svg", "<svg/>");
    public.write_file("mask-icon.svg", "<svg/>");
    public.write_file("favicon.ico", "ico");
    for name in ["home", "market", "trade", "assets"] {
        public.write_png(&format!("screenshots/{name}.png"), 540, 960);
    }

    let report = check_public_dir(public.path()).unwrap();
    assert!(report.passed());
    assert_eq!(report.warnings(), 0);
}

#[test]
fn screenshot_ratio_and_unreadable_png_are_warnings() {
    let public = TempPublicDir::new();
    public.write_png("pwa-192x192.png", 192, 192);
    public.write_png("pwa-512x512.png", 512, 512);
    public.write_png("screenshots/home.png", 960, 540);
    public.write_file("screenshots/market.png", "not a png");

    let report = check_public_dir(public.path()).unwrap();
    assert!(report.passed());

    let home = report.resources.iter().find(|r| r.spec.path == "screenshots/home.png").unwrap();
    assert_eq!(home.level, Level::Warning);
    assert!(home.note.as_deref().unwrap_or_default().contains("9:16"));

    let market = report.resources.iter().find(|r| r.spec.path == "screenshots/market.png").unwrap();
    assert!(market.present);
    assert_eq!(market.level, Level::Warning);
    assert!(market.dimensions.is_none());
}

#[test]
fn json_report_lists_every_resource() {
    let public = TempPublicDir::new();
    public.write_png("pwa-192x192.png", 192, 192);

    let output = Command::new(env!("CARGO_BIN_EXE_check-pwa-resources"))
        .arg("--public-dir")
        .arg(public.path())
        .arg("--json")
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let resources = json["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 10);
    assert_eq!(resources[0]["path"], "pwa-192x192.png");
    assert_eq!(resources[0]["dimensions"]["width"], 192);
    assert_eq!(resources[1]["level"], "failure");
}

#[test]
fn missing_directory_is_an_error() {
    let parent = tempfile::tempdir().unwrap();
    let dir = parent.path().join("absent");
    assert!(check_public_dir(&dir).is_err());
    assert!(!run_binary(&dir).status.success());
}
