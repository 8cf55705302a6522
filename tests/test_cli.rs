//! Integration tests for the clip-resize binary
//!
//! Each test runs the built executable against files in a temporary
//! directory and checks exit status, output files and messages.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use clip_resize::io::{read_y4m, write_y4m};
use clip_scale::format::YUV422P8;
use common::gradient_clip;
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clip-resize"))
        .args(args)
        .output()
        .expect("failed to run clip-resize")
}

fn path(p: &Path) -> &str {
    p.to_str().expect("utf-8 temp path")
}

#[test]
fn test_kernels_lists_every_name() {
    let output = run(&["kernels"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        names,
        ["point", "bilinear", "bicubic", "lanczos", "spline16", "spline36", "spline64"]
    );
}

#[test]
fn test_scale_command_writes_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.y4m");
    let output = dir.path().join("out.y4m");
    write_y4m(&gradient_clip(YUV422P8, 103, 59, 2), &input).unwrap();

    let result = run(&["-q", "scale", path(&input), path(&output), "--factor", "0.5", "--kernel", "Bicubic"]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let out = read_y4m(&output).unwrap();
    assert_eq!((out.width(), out.height()), (50, 29));
    assert_eq!(out.num_frames(), 2);
}

#[test]
fn test_pixel_command_writes_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.y4m");
    let output = dir.path().join("out.y4m");
    write_y4m(&gradient_clip(YUV422P8, 64, 48, 1), &input).unwrap();

    let result = run(&["pixel", path(&input), path(&output), "-W", "32", "-H", "17"]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let out = read_y4m(&output).unwrap();
    assert_eq!((out.width(), out.height()), (32, 17));
}

#[test]
fn test_invalid_factor_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.y4m");
    let output = dir.path().join("out.y4m");
    write_y4m(&gradient_clip(YUV422P8, 16, 16, 1), &input).unwrap();

    let result = run(&["scale", path(&input), path(&output), "--factor=-2"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("scale must be > 0"));
    assert!(!output.exists());
}

#[test]
fn test_negative_factor_reaches_validation() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.y4m");
    let output = dir.path().join("out.y4m");
    write_y4m(&gradient_clip(YUV422P8, 16, 16, 1), &input).unwrap();

    for factor in ["-1", "-0.5", "0"] {
        let result = run(&["scale", path(&input), path(&output), "--factor", factor]);
        assert!(!result.status.success());
        let stderr = String::from_utf8_lossy(&result.stderr);
        assert!(stderr.contains("scale must be > 0"), "{}: {}", factor, stderr);
        assert!(!stderr.contains("unexpected argument"), "{}", stderr);
    }
    let result = run(&["scale", path(&input), path(&output), "-f", "-2"]);
    assert!(String::from_utf8_lossy(&result.stderr).contains("scale must be > 0"));
    assert!(!output.exists());
}

#[test]
fn test_unknown_kernel_fails_with_choices() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.y4m");
    let output = dir.path().join("out.y4m");
    write_y4m(&gradient_clip(YUV422P8, 16, 16, 1), &input).unwrap();

    let result = run(&["scale", path(&input), path(&output), "-k", "gauss"]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Unknown kernel 'gauss'"), "{}", stderr);
    assert!(stderr.contains("spline64"));
}

#[test]
fn test_info_prints_header() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.y4m");
    write_y4m(&gradient_clip(YUV422P8, 24, 10, 4), &input).unwrap();

    let result = run(&["info", path(&input)]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("YUV422P8"), "{}", stdout);
    assert!(stdout.contains("24x10"));
    assert!(stdout.contains("frames:     4"));
    assert!(stdout.contains("25/1"));
}
