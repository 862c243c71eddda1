use std::fmt;

/// Blend mode a drawable is composited with.
///
/// Only equality matters to the compositor; how a mode maps to GPU blend state is up to the
/// rendering context implementation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Standard "source over destination" (premultiplied alpha).
    #[default]
    Normal,
    /// Additive blending.
    Add,
    /// Multiply source and destination.
    Multiply,
    /// Inverse multiply of the inverses.
    Screen,
    /// Multiply or screen depending on the destination.
    Overlay,
    /// Keep the darker of source and destination.
    Darken,
    /// Keep the lighter of source and destination.
    Lighten,
    /// Brighten the destination to reflect the source.
    ColorDodge,
    /// Darken the destination to reflect the source.
    ColorBurn,
    /// Multiply or screen depending on the source.
    HardLight,
    /// Soft variant of hard light.
    SoftLight,
    /// Absolute difference of source and destination.
    Difference,
    /// Lower-contrast difference.
    Exclusion,
    /// Source hue with destination saturation and luminosity.
    Hue,
    /// Source saturation with destination hue and luminosity.
    Saturation,
    /// Source hue and saturation with destination luminosity.
    Color,
    /// Source luminosity with destination hue and saturation.
    Luminosity,
    /// Punch the source alpha out of the destination.
    Erase,
    /// Replace the destination with the source.
    Copy,
}

impl BlendMode {
    /// Every blend mode, in declaration order.
    pub const ALL: [BlendMode; 19] = [
        BlendMode::Normal,
        BlendMode::Add,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
        BlendMode::Erase,
        BlendMode::Copy,
    ];

    /// Stable `snake_case` name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Add => "add",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color_dodge",
            BlendMode::ColorBurn => "color_burn",
            BlendMode::HardLight => "hard_light",
            BlendMode::SoftLight => "soft_light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
            BlendMode::Erase => "erase",
            BlendMode::Copy => "copy",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
