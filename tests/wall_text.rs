use roomkit::prelude::*;
use rusttype::Font;

const FONT: &[u8] = include_bytes!("fonts/DejaVuSansMono.ttf");

fn font() -> Font<'static> {
    let _ = env_logger::builder().is_test(true).try_init();
    Font::try_from_bytes(FONT).expect("the test font parses")
}

fn options() -> DecalOptions {
    DecalOptions::default().with_font_size(32.0).with_opacity(1.0)
}

#[test]
fn rasterized_text_sits_inside_its_mask() {
    let renderer = WallTextRenderer::with_seed(font(), 1);
    let mask = renderer.mask("EXIT", &options());
    let ink = mask.ink_bounds().expect("EXIT leaves ink");

    // The line box is one glyph height tall.
    assert!((32..=33).contains(&mask.height()), "{}", mask.height());
    // Capitals start below the ascent line and left of the first quarter.
    assert!(ink.top > 0);
    assert!(ink.left < mask.width() / 4);
    assert!(ink.bottom < mask.height());

    let longer = renderer.mask("EXIT EXIT", &options());
    assert_eq!(longer.height(), mask.height());
    assert!(longer.width() > 2 * mask.width());
}

#[test]
fn margin_shifts_the_glyphs() {
    let font = font();
    let tight = TextMask::rasterize(&font, "EXIT", 32.0, 0);
    let padded = TextMask::rasterize(&font, "EXIT", 32.0, 5);
    assert_eq!(padded.width(), tight.width() + 10);
    assert_eq!(padded.height(), tight.height() + 10);

    let a = tight.ink_bounds().unwrap();
    let b = padded.ink_bounds().unwrap();
    assert_eq!((b.left, b.top), (a.left + 5, a.top + 5));
    assert_eq!((b.right, b.bottom), (a.right + 5, a.bottom + 5));
    let shifted = padded.coverage(a.left + 5, a.top + 5);
    assert!((shifted - tight.coverage(a.left, a.top)).abs() < 1.0e-3);
}

#[test]
fn every_style_inks_the_text() {
    let mut renderer = WallTextRenderer::with_seed(font(), 7);
    let options = options();
    let mask = renderer.mask("EXIT", &options);
    let ink = mask.ink_bounds().unwrap();
    // Half a glyph of padding on every side, and one more glyph height below.
    let pad = 16;

    for style in DecalStyle::ALL {
        let image = renderer.generate_wall_text("EXIT", style, &options);
        assert_eq!(
            image.dimensions(),
            (mask.width() + 2 * pad, mask.height() + 2 * pad + 32),
            "{}",
            style
        );
        assert_eq!(image.get_pixel(0, 0)[3], 0, "{}", style);

        let inked = (pad + ink.top..=pad + ink.bottom)
            .flat_map(|y| (pad + ink.left..=pad + ink.right).map(move |x| (x, y)))
            .filter(|&(x, y)| image.get_pixel(x, y)[3] > 0)
            .count();
        assert!(inked > 0, "{}", style);
    }
}

#[test]
fn empty_text_gives_a_transparent_image() {
    let mut renderer = WallTextRenderer::with_seed(font(), 3);
    for style in DecalStyle::ALL {
        let image = renderer.generate_wall_text("", style, &options());
        assert!(image.width() > 0 && image.height() > 0);
        assert!(image.pixels().all(|p| p[3] == 0), "{}", style);
    }
}

#[test]
fn unknown_style_names_fall_back_to_scratch() {
    let mut renderer = WallTextRenderer::with_seed(font(), 5);
    let image = renderer.generate_wall_text_named("EXIT", "neon", &options());
    assert!(image.pixels().any(|p| p[3] > 0));
}

#[test]
fn font_bytes_are_parsed() {
    let mut renderer = WallTextRenderer::from_font_bytes(FONT.to_vec()).unwrap();
    let image = renderer.generate_wall_text("B2", DecalStyle::Chalk, &options());
    assert!(image.pixels().any(|p| p[3] > 0));
}
