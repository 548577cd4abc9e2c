//! Seeding the display grid from input text.

use textburn::core::Scene;
use textburn::types::{Dims, BLANK, DEFAULT_BANNER};

fn row(scene: &Scene, y: usize) -> String {
    (0..scene.width()).map(|x| scene.glyph(y, x).unwrap()).collect()
}

#[test]
fn hello_is_left_justified_at_start_row() {
    let scene = Scene::new(Dims::new(10, 40), "HELLO");
    // start_row = max(0, (10 - 1) / 2 - 4) = 0
    for (x, ch) in "HELLO".chars().enumerate() {
        assert_eq!(scene.glyph(0, x), Some(ch));
    }
    assert_eq!(scene.glyph(0, 5), Some(BLANK));
    assert_eq!(scene.unburned_count(), 5);
    for y in 1..10 {
        assert!(row(&scene, y).chars().all(|c| c == BLANK));
    }
}

#[test]
fn text_starts_four_rows_above_center_on_tall_grids() {
    let scene = Scene::new(Dims::new(30, 20), "one\ntwo\nthree");
    // (30 - 3) / 2 - 4 = 9
    assert!(row(&scene, 9).starts_with("one"));
    assert!(row(&scene, 10).starts_with("two"));
    assert!(row(&scene, 11).starts_with("three"));
    assert_eq!(scene.unburned_count(), 11);
}

#[test]
fn text_wider_and_taller_than_grid_is_clipped() {
    let text = "abcdefgh\nijklmnop\nqrstuvwx";
    let scene = Scene::new(Dims::new(2, 4), text);
    assert_eq!(row(&scene, 0), "abcd");
    assert_eq!(row(&scene, 1), "ijkl");
    assert_eq!(scene.unburned_count(), 8);
}

#[test]
fn unicode_glyphs_take_one_cell_each() {
    let scene = Scene::new(Dims::new(1, 4), "héé!");
    assert_eq!(row(&scene, 0), "héé!");
}

#[test]
fn empty_input_places_centered_banner() {
    let scene = Scene::new(Dims::new(20, 60), "");
    let len = DEFAULT_BANNER.chars().count();
    let start = (60 - len) / 2;
    let banner_row = row(&scene, 15);
    assert_eq!(&banner_row[start..start + len], DEFAULT_BANNER);
    assert!(banner_row[..start].chars().all(|c| c == BLANK));
}

#[test]
fn banner_skipped_when_grid_too_short() {
    for h in 0..5 {
        let scene = Scene::new(Dims::new(h, 60), "");
        assert_eq!(scene.unburned_count(), 0, "height {}", h);
    }
    // Exactly five rows: banner lands on row 0.
    let scene = Scene::new(Dims::new(5, 60), "");
    assert!(scene.unburned_count() > 0);
    assert!(row(&scene, 0).contains(DEFAULT_BANNER));
}

#[test]
fn newline_only_input_is_not_the_banner() {
    let scene = Scene::new(Dims::new(10, 40), "\n\n");
    assert_eq!(scene.unburned_count(), 0);
}

#[test]
fn seeding_starts_cold() {
    let scene = Scene::new(Dims::new(6, 6), "hot?");
    assert!(scene.heat_grid().iter().all(|&h| h == 0.0));
}
