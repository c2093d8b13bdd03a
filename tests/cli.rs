//! End-to-end tests: run the binary in a scratch directory and decode what
//! it wrote.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use image::{Rgb, RgbImage, Rgba};
use predicates::prelude::*;

fn cmd(work_dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("placegen");
    cmd.current_dir(work_dir)
        .env("PLACEGEN_CONFIG", work_dir.join("no-such-config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

/// Fresh, empty scratch directory for one test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("placegen_cli_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn decode(path: &Path) -> RgbImage {
    image::open(path).unwrap().to_rgb8()
}

/// Largest per-channel difference between two pixels.
fn distance(a: Rgb<u8>, b: Rgb<u8>) -> u8 {
    a.0.iter().zip(b.0).map(|(x, y)| x.abs_diff(y)).max().unwrap_or(0)
}

#[test]
fn default_run_writes_both_jpegs() {
    let dir = scratch("default");

    cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Creating face placeholder..."))
        .stderr(predicate::str::contains("Created: assets/default_person.jpg"))
        .stdout(predicate::str::contains("Usage:"));

    let face = decode(&dir.join("assets/default_face.jpg"));
    assert_eq!(face.dimensions(), (512, 512));
    let head = *face.get_pixel(256, 380);
    for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
        let corner = *face.get_pixel(x, y);
        assert!(distance(corner, Rgb([240, 240, 240])) < 8, "corner {x},{y} is {corner:?}");
        assert!(distance(head, corner) > 30, "head {head:?} vs corner {corner:?}");
    }

    let person = decode(&dir.join("assets/default_person.jpg"));
    assert_eq!(person.dimensions(), (512, 768));
    let torso_mid = *person.get_pixel(256, 391);
    // (235, 650) is the left leg's midpoint, under the secondary caption's backing
    let leg_mid = *person.get_pixel(235, 650);
    assert!(distance(torso_mid, leg_mid) > 30, "torso {torso_mid:?} vs leg {leg_mid:?}");
    let leg_below_caption = *person.get_pixel(235, 700);
    assert!(distance(leg_below_caption, Rgb([60, 80, 100])) < 8, "leg is {leg_below_caption:?}");
    assert!(distance(torso_mid, leg_below_caption) > 30);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_output_keeps_exact_colors() {
    let dir = scratch("png");

    cmd(&dir).args(["--format", "png", "--output-dir", "out"]).assert().success();

    let face = decode(&dir.join("out/default_face.png"));
    assert_eq!(*face.get_pixel(0, 0), Rgb([240, 240, 240]));
    assert_eq!(*face.get_pixel(256, 380), Rgb([200, 180, 160]));
    assert_eq!(*face.get_pixel(312, 220), Rgb([255, 255, 255]));

    let person = decode(&dir.join("out/default_person.png"));
    assert_eq!(*person.get_pixel(256, 391), Rgb([100, 120, 140]));
    assert_eq!(*person.get_pixel(150, 300), Rgb([100, 120, 140]));
    assert_eq!(*person.get_pixel(235, 700), Rgb([60, 80, 100]));
    assert_eq!(*person.get_pixel(275, 700), Rgb([240, 240, 240]), "gap between the legs");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn second_run_reuses_directory_and_rewrites_identical_bytes() {
    let dir = scratch("rerun");
    let face = dir.join("assets/default_face.jpg");

    cmd(&dir).assert().success();
    let first = std::fs::read(&face).unwrap();

    cmd(&dir).assert().success();
    let second = std::fs::read(&face).unwrap();

    assert_eq!(first, second);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn only_flag_limits_output() {
    let dir = scratch("only");

    cmd(&dir)
        .args(["--only", "person"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_person.jpg"))
        .stdout(predicate::str::contains("default_face").not());

    assert!(dir.join("assets/default_person.jpg").is_file());
    assert!(!dir.join("assets/default_face.jpg").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn accessories_flag_writes_translucent_pngs() {
    let dir = scratch("accessories");

    cmd(&dir)
        .args(["--accessories", "--format", "jpeg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created: assets/glasses.png"))
        .stderr(predicate::str::contains("Created: assets/funny_hat.png"));

    let glasses = image::open(dir.join("assets/glasses.png")).unwrap().to_rgba8();
    assert_eq!(glasses.dimensions(), (100, 50));
    assert!(glasses.pixels().all(|p| *p == Rgba([255, 255, 0, 128])));

    let hat = image::open(dir.join("assets/funny_hat.png")).unwrap().to_rgba8();
    assert_eq!(hat.dimensions(), (120, 60));
    assert!(hat.pixels().all(|p| *p == Rgba([255, 0, 255, 128])));

    assert!(dir.join("assets/default_face.jpg").is_file());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn accessories_are_off_by_default() {
    let dir = scratch("no_accessories");

    cmd(&dir).args(["--only", "face"]).assert().success();

    assert!(!dir.join("assets/glasses.png").exists());
    assert!(!dir.join("assets/funny_hat.png").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_format_exits_with_error() {
    let dir = scratch("bad_format");

    cmd(&dir)
        .args(["--format", "gif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));

    assert!(!dir.join("assets").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_quality_exits_with_error() {
    let dir = scratch("bad_quality");

    cmd(&dir)
        .args(["--quality", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported JPEG quality"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn blocked_output_directory_reports_persistence_failure() {
    let dir = scratch("blocked");
    std::fs::write(dir.join("assets"), b"in the way").unwrap();

    cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Asset persistence failed"))
        .stderr(predicate::str::contains("assets/default_face.jpg"))
        .stderr(predicate::str::contains("2 of 2 placeholder assets could not be written"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn config_file_sets_defaults_and_flags_override() {
    let dir = scratch("config");
    let config = dir.join("placegen.toml");
    std::fs::write(&config, "[output]\ndir = \"from-config\"\nformat = \"png\"\n").unwrap();

    cmd(&dir).arg("--config").arg(&config).assert().success();
    assert!(dir.join("from-config/default_face.png").is_file());

    cmd(&dir).arg("--config").arg(&config).args(["--format", "webp"]).assert().success();
    assert!(dir.join("from-config/default_person.webp").is_file());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn broken_config_exits_with_error() {
    let dir = scratch("broken_config");
    let config = dir.join("broken.toml");
    std::fs::write(&config, "[output\n").unwrap();

    cmd(&dir)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn record_ops_writes_draw_log() {
    let dir = scratch("record_ops");

    cmd(&dir)
        .args(["--record-ops", "logs/ops.yaml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Draw ops saved"));

    let log = std::fs::read_to_string(dir.join("logs/ops.yaml")).unwrap();
    assert!(log.contains("recorded_at"));
    assert!(log.contains("op: clear"));
    assert!(log.contains("PLACEHOLDER FACE"));
    assert!(log.contains("PLACEHOLDER PERSON"));

    let _ = std::fs::remove_dir_all(&dir);
}
