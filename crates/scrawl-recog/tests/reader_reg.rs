//! End-to-end regression tests for the reader, using on-disk language
//! packs under `tests/data/packs`.

use scrawl_core::{Color, Raster};
use scrawl_recog::{Reader, RecogError, TemplateStore};
use std::path::PathBuf;

fn pack_store() -> TemplateStore {
    TemplateStore::new(format!("{}/tests/data/packs", env!("CARGO_MANIFEST_DIR")))
}

fn english_reader() -> Reader {
    Reader::new(pack_store()).unwrap()
}

/// 2-column vertical bar with its left edge at `x`.
fn draw_bar(raster: &mut Raster, x: u32) {
    let h = raster.height();
    raster.fill_rect(x, 1, 2, h - 2, Color::BLACK).unwrap();
}

/// 9-column horizontal dash centered at row `height / 2`.
fn draw_dash(raster: &mut Raster, x: u32) {
    let y = raster.height() / 2;
    raster.fill_rect(x, y, 9, 1, Color::BLACK).unwrap();
}

#[test]
fn test_defaults() {
    let reader = english_reader();
    assert_eq!(reader.language(), "English");
    assert_eq!(reader.background(), Color::WHITE);
}

#[test]
fn test_blank_image_reads_empty() {
    let reader = english_reader();
    let raster = Raster::new(50, 30, Color::WHITE).unwrap();
    assert_eq!(reader.read(&raster), "");
}

#[test]
fn test_single_character() {
    let reader = english_reader();
    let mut raster = Raster::new(30, 20, Color::WHITE).unwrap();
    draw_bar(&mut raster, 14);
    assert_eq!(reader.read(&raster), "l");
}

#[test]
fn test_word_left_to_right() {
    let reader = english_reader();
    let mut raster = Raster::new(60, 20, Color::WHITE).unwrap();
    draw_bar(&mut raster, 5);
    draw_dash(&mut raster, 20);
    draw_bar(&mut raster, 40);
    assert_eq!(reader.read(&raster), "l-l");
}

#[test]
fn test_touching_characters_read_as_one_glyph() {
    // Two bars with no blank column between them segment as a single
    // region; the merged glyph still normalizes to the center column
    // and reads as one 'l', not two.
    let reader = english_reader();
    let mut raster = Raster::new(30, 20, Color::WHITE).unwrap();
    draw_bar(&mut raster, 10);
    draw_bar(&mut raster, 12);

    assert_eq!(reader.read(&raster).len(), 1);
}

#[test]
fn test_unknown_language_fails_construction() {
    let result = Reader::with_config(pack_store(), "Martian", Color::WHITE);
    assert!(matches!(
        result,
        Err(RecogError::LanguagePackNotFound { language }) if language == "Martian"
    ));
}

#[test]
fn test_malformed_pack_fails_construction() {
    let result = Reader::with_config(pack_store(), "Broken", Color::WHITE);
    assert!(matches!(
        result,
        Err(RecogError::MalformedTemplateRecord { line: 1, .. })
    ));
}

#[test]
fn test_failed_set_language_keeps_configuration() {
    let mut reader = english_reader();
    let mut raster = Raster::new(30, 20, Color::WHITE).unwrap();
    draw_bar(&mut raster, 14);

    assert!(reader.set_language("Broken").is_err());
    assert_eq!(reader.language(), "English");
    assert_eq!(reader.read(&raster), "l");

    assert!(reader.set_language("Martian").is_err());
    assert_eq!(reader.language(), "English");
    assert_eq!(reader.read(&raster), "l");
}

#[test]
fn test_language_round_trip() {
    let mut reader = english_reader();
    let mut raster = Raster::new(30, 20, Color::WHITE).unwrap();
    draw_bar(&mut raster, 14);

    assert_eq!(reader.read(&raster), "l");

    reader.set_language("Digits").unwrap();
    assert_eq!(reader.language(), "Digits");
    assert_eq!(reader.read(&raster), "1");

    reader.set_language("English").unwrap();
    assert_eq!(reader.read(&raster), "l");
}

#[test]
fn test_read_path_png() {
    let reader = english_reader();
    let mut raster = Raster::new(30, 20, Color::WHITE).unwrap();
    draw_bar(&mut raster, 14);

    let path = temp_png_path("read_path");
    write_png(&path, &raster);
    let text = reader.read_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(text, "l");
}

#[test]
fn test_read_path_missing_file() {
    let reader = english_reader();
    let result = reader.read_path(temp_png_path("missing"));
    assert!(matches!(result, Err(RecogError::Decode(_))));
}

fn temp_png_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scrawl_recog_{}_{}.png", std::process::id(), name))
}

fn write_png(path: &PathBuf, raster: &Raster) {
    let mut rgb = Vec::with_capacity((raster.width() * raster.height() * 3) as usize);
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let c = raster.color_at(x, y).unwrap();
            rgb.extend_from_slice(&[c.r, c.g, c.b]);
        }
    }
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(file, raster.width(), raster.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&rgb).unwrap();
}
