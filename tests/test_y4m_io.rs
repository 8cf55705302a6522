//! Integration tests for Y4M files on disk
//!
//! Read, resize and write through real files in a temporary directory.

mod common;

use clip_resize::config::{ResizeConfig, ResizeMode};
use clip_resize::io::{read_y4m, write_y4m};
use clip_scale::format::{GRAY8, YUV420P10, YUV420P8};
use common::gradient_clip;
use tempfile::TempDir;

#[test]
fn test_file_round_trip_keeps_samples() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gradient.y4m");
    let clip = gradient_clip(YUV420P10, 16, 8, 3);

    assert_eq!(write_y4m(&clip, &path).unwrap(), 3);
    let back = read_y4m(&path).unwrap();
    assert_eq!(back.format(), Some(YUV420P10));
    assert_eq!((back.width(), back.height()), (16, 8));
    assert_eq!(back.num_frames(), 3);
    assert_eq!(back.fps(), (25, 1));
    for n in 0..3 {
        assert_eq!(*back.get_frame(n).unwrap(), *clip.get_frame(n).unwrap());
    }
}

#[test]
fn test_resize_job_through_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.y4m");
    let output = dir.path().join("out.y4m");
    write_y4m(&gradient_clip(YUV420P8, 101, 57, 2), &input).unwrap();

    let config = ResizeConfig::new(&input, &output, ResizeMode::Scale { factor: 0.5 }, "Spline36");
    config.validate().unwrap();
    let resized = config.apply(&read_y4m(&config.input).unwrap()).unwrap();
    write_y4m(&resized, &config.output).unwrap();

    let out = read_y4m(&output).unwrap();
    assert_eq!((out.width(), out.height()), (50, 28));
    assert_eq!(out.num_frames(), 2);
    assert_eq!(out.get_frame(1).unwrap().planes[1].width, 25);
}

#[test]
fn test_pixel_job_through_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("gray.y4m");
    let output = dir.path().join("gray_out.y4m");
    write_y4m(&gradient_clip(GRAY8, 40, 30, 1), &input).unwrap();

    let mode = ResizeMode::Pixel {
        width: Some(21),
        height: None,
    };
    let config = ResizeConfig::new(&input, &output, mode, "lanczos");
    let resized = config.apply(&read_y4m(&input).unwrap()).unwrap();
    write_y4m(&resized, &output).unwrap();

    let out = read_y4m(&output).unwrap();
    assert_eq!((out.width(), out.height()), (21, 30));
    assert_eq!(out.format(), Some(GRAY8));
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_y4m(&dir.path().join("missing.y4m")).unwrap_err();
    assert_eq!(err.category(), "io");
    assert!(err.to_string().contains("missing.y4m"));
}

#[test]
fn test_garbage_input_is_container_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.y4m");
    std::fs::write(&path, b"not a y4m stream\n").unwrap();
    let err = read_y4m(&path).unwrap_err();
    assert!(matches!(err.category(), "container" | "io"), "{}", err);
}
