//! The five wall writing recipes.

use crate::color::{self, Color};
use crate::decal::DecalOptions;
use crate::error::LevelError;
use crate::texture::{Canvas, InkBounds, TextMask};
use glamx::Vec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How a piece of wall writing looks.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecalStyle {
    /// Thin gray strokes scratched into the wall.
    #[default]
    Scratch,
    /// Grainy chalk.
    Chalk,
    /// Outlined spray paint with a few drips.
    Paint,
    /// Dark red smears running down the wall.
    Blood,
    /// Letters gouged into the surface.
    Carved,
}

impl DecalStyle {
    /// All styles.
    pub const ALL: [DecalStyle; 5] = [
        DecalStyle::Scratch,
        DecalStyle::Chalk,
        DecalStyle::Paint,
        DecalStyle::Blood,
        DecalStyle::Carved,
    ];

    /// The name used by level data for this style.
    pub fn name(self) -> &'static str {
        match self {
            DecalStyle::Scratch => "scratch",
            DecalStyle::Chalk => "chalk",
            DecalStyle::Paint => "paint",
            DecalStyle::Blood => "blood",
            DecalStyle::Carved => "carved",
        }
    }

    /// Looks up a style by name, falling back to [`DecalStyle::Scratch`].
    pub fn from_name_or_default(name: &str) -> DecalStyle {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown decal style {:?}, using scratch.", name);
            DecalStyle::Scratch
        })
    }
}

impl fmt::Display for DecalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecalStyle {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecalStyle::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| LevelError::UnknownDecalStyle(s.to_string()))
    }
}

const CHALK_HUES: [Color; 3] = [
    Color::new(0.96, 0.96, 0.93, 1.0),
    Color::new(1.0, 0.96, 0.78, 1.0),
    Color::new(0.98, 0.92, 0.62, 1.0),
];

const PAINT_COLORS: [Color; 4] = [
    Color::new(0.85, 0.08, 0.08, 1.0),
    Color::new(0.1, 0.3, 0.85, 1.0),
    Color::new(0.1, 0.65, 0.2, 1.0),
    Color::new(0.95, 0.6, 0.05, 1.0),
];

const BLOOD_DARK: Color = Color::new(0.42, 0.02, 0.02, 1.0);
const BLOOD_BRIGHT: Color = Color::new(0.72, 0.05, 0.05, 1.0);

/// Where a mask is drawn on the decal canvas.
pub(crate) struct Placement<'a> {
    pub mask: &'a TextMask,
    pub origin: Vec2,
    pub ink: InkBounds,
}

impl Placement<'_> {
    fn random_ink_x<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.origin.x + rng.random_range(self.ink.left..=self.ink.right) as f32
    }

    fn ink_bottom(&self) -> f32 {
        self.origin.y + self.ink.bottom as f32
    }

    fn jittered<R: Rng + ?Sized>(&self, rng: &mut R, amount: f32) -> Vec2 {
        let jitter = Vec2::new(
            rng.random_range(-amount..=amount),
            rng.random_range(-amount..=amount),
        );
        self.origin + jitter
    }
}

pub(crate) fn draw<R: Rng + ?Sized>(
    style: DecalStyle,
    canvas: &mut Canvas,
    at: &Placement<'_>,
    options: &DecalOptions,
    rng: &mut R,
) {
    match style {
        DecalStyle::Scratch => scratch(canvas, at, options, rng),
        DecalStyle::Chalk => chalk(canvas, at, options, rng),
        DecalStyle::Paint => paint(canvas, at, options, rng),
        DecalStyle::Blood => blood(canvas, at, options, rng),
        DecalStyle::Carved => carved(canvas, at, options),
    }
}

fn scratch<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    at: &Placement<'_>,
    options: &DecalOptions,
    rng: &mut R,
) {
    for _ in 0..3 {
        let gray = rng.random_range(0.55..0.8);
        let offset = at.jittered(&mut *rng, 1.5);
        let ink = Color::new(gray, gray, gray, 0.5 * options.opacity);
        canvas.draw_mask(at.mask, offset, ink);
    }

    let size = options.glyph_size();
    let line = Color::new(0.75, 0.75, 0.75, 0.2 * options.opacity);
    for _ in 0..rng.random_range(2..=4) {
        let from = Vec2::new(
            at.random_ink_x(&mut *rng),
            at.origin.y + rng.random_range(at.ink.top..=at.ink.bottom) as f32,
        );
        let angle = rng.random_range(-0.6f32..0.6);
        let length = rng.random_range(size * 0.5..=size * 1.5);
        let to = from + Vec2::new(angle.cos(), angle.sin()) * length;
        canvas.stroke_segment(from, to, rng.random_range(0.5..=1.0), line);
    }
}

fn chalk<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    at: &Placement<'_>,
    options: &DecalOptions,
    rng: &mut R,
) {
    let hue = *CHALK_HUES.choose(&mut *rng).unwrap_or(&color::WHITE);

    for _ in 0..4 {
        let offset = at.jittered(&mut *rng, 1.0);
        canvas.draw_mask(at.mask, offset, color::alpha(hue, 0.3 * options.opacity));
    }

    // Dust speckles stay in a band hugging the letters.
    let band = (options.glyph_size() * 0.15).max(2.0);
    let top = at.origin.y + at.ink.top as f32 - band;
    let bottom = at.ink_bottom() + band;
    let ink_area = (at.ink.right - at.ink.left + 1) as f32 * (bottom - top);
    for _ in 0..(ink_area / 30.0) as u32 {
        let x = at.random_ink_x(&mut *rng);
        let y = rng.random_range(top..=bottom);
        let alpha = rng.random_range(0.1..0.4) * options.opacity;
        canvas.fill_rect(x, y, 1.0, 1.0, color::alpha(hue, alpha));
    }
}

fn paint<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    at: &Placement<'_>,
    options: &DecalOptions,
    rng: &mut R,
) {
    let paint = *PAINT_COLORS.choose(&mut *rng).unwrap_or(&PAINT_COLORS[0]);
    let size = options.glyph_size();

    let outline = at.mask.outline(((size * 0.04).round() as u32).max(1));
    let rim = color::alpha(color::shade(paint, 0.5), options.opacity);
    let fill = color::alpha(paint, options.opacity);
    canvas.draw_mask(&outline, at.origin, rim);
    canvas.draw_mask(at.mask, at.origin, fill);

    for _ in 0..rng.random_range(4..=10) {
        let center = Vec2::new(
            at.random_ink_x(&mut *rng),
            at.ink_bottom() + rng.random_range(0.0..=size * 0.6),
        );
        canvas.fill_circle(center, rng.random_range(1.0..=3.0), fill);
    }
}

fn blood<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    at: &Placement<'_>,
    options: &DecalOptions,
    rng: &mut R,
) {
    let size = options.glyph_size();

    let glow = color::alpha(BLOOD_BRIGHT, 0.35 * options.opacity);
    let drip = color::alpha(BLOOD_DARK, options.opacity);
    canvas.draw_mask(at.mask, at.origin + Vec2::ONE, glow);
    canvas.draw_mask(at.mask, at.origin, drip);

    for _ in 0..rng.random_range(3..=6) {
        let x = at.random_ink_x(&mut *rng);
        let y = at.ink_bottom() - 2.0;
        let length = rng.random_range(size * 0.3..=size);
        let sway = rng.random_range(-3.0..=3.0);
        let width = rng.random_range(1.5..=3.0);

        let start = Vec2::new(x, y);
        let end = Vec2::new(x + sway * 0.5, y + length);
        canvas.stroke_cubic(
            start,
            Vec2::new(x + sway, y + length / 3.0),
            Vec2::new(x - sway, y + length * 2.0 / 3.0),
            end,
            width,
            drip,
        );
        canvas.fill_circle(end, width * 0.9, drip);
    }
}

fn carved(canvas: &mut Canvas, at: &Placement<'_>, options: &DecalOptions) {
    let surface = color::with_alpha(options.surface, 1.0);
    let groove = at.mask.outline(1);

    let shadow = color::alpha(color::BLACK, 0.45 * options.opacity);
    let rim = color::alpha(color::shade(surface, 0.3), 0.6 * options.opacity);
    let face = color::alpha(color::shade(surface, 0.55), options.opacity);
    let highlight = color::alpha(color::shade(surface, 1.4), 0.35 * options.opacity);

    canvas.draw_mask(at.mask, at.origin + Vec2::splat(2.0), shadow);
    canvas.draw_mask(&groove, at.origin, rim);
    canvas.draw_mask(at.mask, at.origin, face);
    canvas.draw_mask(&groove, at.origin - Vec2::ONE, highlight);
}
