mod common;

use common::{call_count, FixedClassifier};
use digitpad::headless::{classify_file, NO_DIGIT};
use digitpad::DigitError;
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::PathBuf;

fn write_vertical_stroke(dir: &tempfile::TempDir) -> PathBuf {
    let mut img = RgbImage::new(200, 200);
    for y in 30..170 {
        for x in 95..105 {
            img.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
    let path = dir.path().join("one.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_plain_output_shows_digit_and_confidence() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vertical_stroke(&dir);
    let (classifier, calls) = FixedClassifier::new();

    let line = classify_file(&classifier, &path, false).unwrap();

    assert_eq!(line, "4 (87.50%)");
    assert_eq!(call_count(&calls), 1);
}

#[test]
fn test_json_output_carries_probabilities() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_vertical_stroke(&dir);
    let (classifier, _) = FixedClassifier::new();

    let line = classify_file(&classifier, &path, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();

    assert_eq!(value["digit"], 4);
    assert!((value["confidence"].as_f64().unwrap() - 0.875).abs() < 1e-6);
    assert_eq!(value["probabilities"].as_array().unwrap().len(), 10);
}

#[test]
fn test_blank_image_reports_no_digit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");
    GrayImage::from_pixel(64, 64, Luma([0])).save(&path).unwrap();
    let (classifier, calls) = FixedClassifier::new();

    let line = classify_file(&classifier, &path, true).unwrap();

    assert_eq!(line, NO_DIGIT);
    assert_eq!(call_count(&calls), 0);
}

#[test]
fn test_unreadable_image_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (classifier, _) = FixedClassifier::new();

    let err = classify_file(&classifier, &dir.path().join("missing.png"), false).unwrap_err();
    assert!(matches!(err, DigitError::ImageError(_)));
}
