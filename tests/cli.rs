// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_sample(dir: &Path, width: u32, height: u32) -> std::path::PathBuf {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 17) as u8, (y * 29) as u8, ((x + y) * 7) as u8])
    });
    let path = dir.join("sample.png");
    image.save(&path).unwrap();
    path
}

#[test]
fn shrinks_both_dimensions() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 12, 9);
    let output = dir.path().join("carved.png");

    Command::cargo_bin("carv")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "8", "--height", "6"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!((carved.width(), carved.height()), (8, 6));
}

#[test]
fn omitted_dimension_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 10, 7);
    let output = dir.path().join("narrow.png");

    Command::cargo_bin("carv")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["-w", "4"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!((carved.width(), carved.height()), (4, 7));
}

#[test]
fn refuses_to_upscale() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 6, 6);
    let output = dir.path().join("bigger.png");

    Command::cargo_bin("carv")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot upscale"));
    assert!(!output.exists());
}

#[test]
fn reports_unreadable_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.png");

    Command::cargo_bin("carv")
        .unwrap()
        .arg(dir.path().join("missing.png"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
}
