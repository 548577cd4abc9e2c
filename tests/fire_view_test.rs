use textburn::core::{Frame, Scene};
use textburn::term::{CellStyle, FireView, Palette, Rgb, Viewport};
use textburn::types::{ColorTier, Dims};

#[test]
fn text_uses_neutral_style_and_fire_uses_tier_styles() {
    let mut scene = Scene::new(Dims::new(2, 3), "T");
    scene.set_heat(0, 1, 1.0);
    scene.set_heat(0, 2, 0.3);
    let frame = Frame::from_scene(&scene);

    let palette = Palette::default();
    let fb = FireView::new(palette).render(&frame, Viewport::new(3, 2));

    let text = fb.get(0, 0).unwrap();
    assert_eq!(text.ch, 'T');
    assert_eq!(text.style, palette.style(ColorTier::Neutral));

    let hot = fb.get(1, 0).unwrap();
    assert_eq!(hot.ch, '#');
    assert_eq!(hot.style, palette.style(ColorTier::A));

    let cool = fb.get(2, 0).unwrap();
    assert_eq!(cool.ch, '.');
    assert_eq!(cool.style, palette.style(ColorTier::D));
}

#[test]
fn custom_palette_is_used() {
    let magenta = CellStyle::fg(Rgb::new(1, 2, 3));
    let palette = Palette {
        neutral: CellStyle::default(),
        fire: [magenta; 4],
    };
    let mut scene = Scene::blank(Dims::new(1, 1));
    scene.set_heat(0, 0, 0.7);
    let fb = FireView::new(palette).render(&Frame::from_scene(&scene), Viewport::new(1, 1));
    assert_eq!(fb.get(0, 0).unwrap().style, magenta);
}

#[test]
fn zero_sized_viewport_is_harmless() {
    let scene = Scene::new(Dims::new(5, 5), "boom");
    let fb = FireView::default().render(&Frame::from_scene(&scene), Viewport::new(0, 0));
    assert!(fb.cells().is_empty());
}
