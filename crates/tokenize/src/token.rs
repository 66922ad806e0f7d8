use std::fmt;

use serde::Serialize;

use crate::dictionary::TokenId;

/// One encoded segment of the input text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    /// identifier from the static dictionary or the dynamic vocabulary
    pub id: TokenId,
    /// exact substring of the input
    pub text: String,
    /// true when the text (or its lowercase form) is a dictionary word
    pub is_common: bool,
    /// presentation colour derived from the token's position
    pub color: DisplayColor,
}

/// HSL colour handed to renderers; hue rotates by 137.5 degrees per token.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DisplayColor {
    /// hue in degrees, `[0, 360)`
    pub hue: f64,
    /// saturation percent
    pub saturation: u8,
    /// lightness percent
    pub lightness: u8,
}

impl DisplayColor {
    const HUE_STEP: f64 = 137.5;

    /// Colour for the token at `index` in an encode result.
    pub fn for_index(index: usize) -> Self {
        Self {
            hue: (index as f64 * Self::HUE_STEP) % 360.0,
            saturation: 70,
            lightness: 65,
        }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Render token IDs as `", "`-joined decimals, in token order.
pub fn ids_to_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_rotation() {
        assert_eq!(DisplayColor::for_index(0).to_string(), "hsl(0, 70%, 65%)");
        assert_eq!(DisplayColor::for_index(1).to_string(), "hsl(137.5, 70%, 65%)");
        assert_eq!(DisplayColor::for_index(2).to_string(), "hsl(275, 70%, 65%)");
        // 3 * 137.5 = 412.5 wraps past 360
        assert_eq!(DisplayColor::for_index(3).hue, 52.5);
    }

    #[test]
    fn ids_join_with_comma_space() {
        let tokens: Vec<Token> = [51u64, 101, 200]
            .iter()
            .enumerate()
            .map(|(i, id)| Token {
                id: *id,
                text: String::new(),
                is_common: true,
                color: DisplayColor::for_index(i),
            })
            .collect();
        assert_eq!(ids_to_string(&tokens), "51, 101, 200");
        assert_eq!(ids_to_string(&[]), "");
    }
}
