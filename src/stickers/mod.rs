//! Procedural sticker asset registry.
//!
//! Every asset is a deterministic function of its nominal size: drawing the
//! same kind at the same size twice produces pixel-identical output. Assets
//! draw centered on the local origin with a silhouette spanning roughly
//! `2 x nominal_size`; the caller owns the translate/rotate/scale/flip
//! transform.

use crate::foundation::core::Affine;
use crate::render::painter::Painter;

mod doodle;
mod pets;
mod ribbon;
mod seasonal;
pub(crate) mod shading;
mod sparkle;

/// Metallic finish shared by the sparkle family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finish {
    Silver,
    Holo,
}

/// Silhouettes of the Y2K sparkle family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparkleShape {
    Star,
    Moon,
    Cross,
}

/// Satin bow variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RibbonStyle {
    RedSatin,
    PinkSatin,
    BlueGingham,
}

/// Hand-drawn outline doodles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoodleShape {
    Sparkle,
    Heart,
    Wings,
    Whiskers,
    Crown,
}

/// Retro seasonal ornaments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeasonalShape {
    Bauble,
    Holly,
    Light,
    Stocking,
    Tree,
}

/// Liquid-metal pet spheres.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetShape {
    Bear,
    Bunny,
    Kitty,
    Puppy,
    Bird,
}

/// Fully resolved sticker kind.
///
/// Catalog key strings resolve into this tagged form once, up front; the
/// draw path dispatches on the tag and never inspects strings, and unknown
/// keys land on [`AssetKind::Placeholder`] instead of silently picking a
/// near-match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Sparkle { shape: SparkleShape, finish: Finish },
    Ribbon(RibbonStyle),
    Doodle(DoodleShape),
    Seasonal(SeasonalShape),
    Pet(PetShape),
    /// Generic glyph drawn for unknown catalog keys.
    Placeholder,
}

impl AssetKind {
    /// Resolve a catalog key, falling back to the placeholder glyph.
    pub fn parse(key: &str) -> AssetKind {
        Self::resolve(key).unwrap_or(AssetKind::Placeholder)
    }

    /// Strict resolution: `None` for keys outside the registry.
    pub fn resolve(key: &str) -> Option<AssetKind> {
        let kind = match key {
            "y2k_star_silver" => AssetKind::Sparkle {
                shape: SparkleShape::Star,
                finish: Finish::Silver,
            },
            "y2k_star_holo" => AssetKind::Sparkle {
                shape: SparkleShape::Star,
                finish: Finish::Holo,
            },
            "y2k_moon_silver" => AssetKind::Sparkle {
                shape: SparkleShape::Moon,
                finish: Finish::Silver,
            },
            "y2k_moon_holo" => AssetKind::Sparkle {
                shape: SparkleShape::Moon,
                finish: Finish::Holo,
            },
            "y2k_cross_silver" => AssetKind::Sparkle {
                shape: SparkleShape::Cross,
                finish: Finish::Silver,
            },
            "y2k_cross_holo" => AssetKind::Sparkle {
                shape: SparkleShape::Cross,
                finish: Finish::Holo,
            },
            "ribbon_red_satin" => AssetKind::Ribbon(RibbonStyle::RedSatin),
            "ribbon_pink_satin" => AssetKind::Ribbon(RibbonStyle::PinkSatin),
            "ribbon_blue_check" => AssetKind::Ribbon(RibbonStyle::BlueGingham),
            "doodle_sparkle" => AssetKind::Doodle(DoodleShape::Sparkle),
            "doodle_heart" => AssetKind::Doodle(DoodleShape::Heart),
            "doodle_wings" => AssetKind::Doodle(DoodleShape::Wings),
            "doodle_whiskers" => AssetKind::Doodle(DoodleShape::Whiskers),
            "doodle_crown" => AssetKind::Doodle(DoodleShape::Crown),
            "retro_bauble" => AssetKind::Seasonal(SeasonalShape::Bauble),
            "retro_holly" => AssetKind::Seasonal(SeasonalShape::Holly),
            "retro_light" => AssetKind::Seasonal(SeasonalShape::Light),
            "retro_stocking" => AssetKind::Seasonal(SeasonalShape::Stocking),
            "retro_tree" => AssetKind::Seasonal(SeasonalShape::Tree),
            "cyber_bear" => AssetKind::Pet(PetShape::Bear),
            "cyber_bunny" => AssetKind::Pet(PetShape::Bunny),
            "cyber_kitty" => AssetKind::Pet(PetShape::Kitty),
            "cyber_puppy" => AssetKind::Pet(PetShape::Puppy),
            "cyber_bird" => AssetKind::Pet(PetShape::Bird),
            _ => return None,
        };
        Some(kind)
    }
}

/// Draw `kind` centered on the origin of `base`, spanning `2 x nominal_size`.
pub(crate) fn draw(p: &mut Painter, base: Affine, kind: AssetKind, nominal_size: f64) {
    if !nominal_size.is_finite() || nominal_size <= 0.0 {
        return;
    }
    match kind {
        AssetKind::Sparkle { shape, finish } => sparkle::draw(p, base, shape, finish, nominal_size),
        AssetKind::Ribbon(style) => ribbon::draw(p, base, style, nominal_size),
        AssetKind::Doodle(shape) => doodle::draw(p, base, shape, nominal_size),
        AssetKind::Seasonal(shape) => seasonal::draw(p, base, shape, nominal_size),
        AssetKind::Pet(shape) => pets::draw(p, base, shape, nominal_size),
        AssetKind::Placeholder => draw_placeholder(p, base, nominal_size),
    }
}

/// Dashed circle with a question mark, for keys the registry does not know.
fn draw_placeholder(p: &mut Painter, base: Affine, size: f64) {
    use crate::assets::color::Color;
    use crate::render::painter::StrokeStyle;

    let grey = Color::from_hex("#94a3b8").unwrap_or(Color::BLACK);
    let ring = shading::circle_path(0.0, 0.0, size * 0.9);
    p.stroke_path(
        base,
        grey,
        &StrokeStyle::new(size * 0.08).with_dashes(&[size * 0.25, size * 0.18]),
        &ring,
    );

    // Question mark as a polyline hook plus a dot.
    let k = size / 60.0;
    let mut hook = kurbo::BezPath::new();
    hook.move_to((-14.0 * k, -18.0 * k));
    hook.curve_to(
        (-14.0 * k, -34.0 * k),
        (14.0 * k, -34.0 * k),
        (14.0 * k, -16.0 * k),
    );
    hook.curve_to((14.0 * k, -4.0 * k), (0.0, -6.0 * k), (0.0, 8.0 * k));
    p.stroke_path(base, grey, &StrokeStyle::new(7.0 * k), &hook);
    p.fill_path(base, grey, &shading::circle_path(0.0, 22.0 * k, 4.5 * k));
}

#[cfg(test)]
#[path = "../../tests/unit/stickers/registry.rs"]
mod tests;
