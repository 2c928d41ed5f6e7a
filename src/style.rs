//! Style inputs consumed by the flattening policy.

use core::str::FromStr;

use num_traits::Float;

use crate::error::ParseError;

/// A configured width or height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Length {
    /// Absolute length in layout units.
    Fixed(i32),
    /// Percentage of the containing block, on a 0–100 scale.
    Percent(f32),
    /// Sized by the layout engine.
    #[default]
    Auto,
}

impl Length {
    /// Whether the author pinned this dimension to an absolute value.
    ///
    /// Percentages are not fixed: they follow the containing block.
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Resolve against a containing extent. `None` for [`Auto`](Self::Auto).
    pub fn resolve(&self, containing: i32) -> Option<i32> {
        match *self {
            Self::Fixed(v) => Some(v),
            Self::Percent(p) => Some(Float::round(containing as f64 * p as f64 / 100.0) as i32),
            Self::Auto => None,
        }
    }

    /// Parse an HTML dimension attribute value such as `300`, `50%` or `12.5`.
    ///
    /// Leading whitespace is skipped and anything after the number (other
    /// than a `%` immediately following it) is ignored, so `300px` is 300.
    /// Empty values and `auto` give [`Auto`](Self::Auto). Fractional pixel
    /// values round to the nearest unit.
    pub fn parse_dimension(value: &str) -> Result<Self, ParseError> {
        let s = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
        if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        let bytes = s.as_bytes();
        if !bytes[0].is_ascii_digit() {
            return Err(ParseError::InvalidLength);
        }

        let mut pos = 0;
        let mut number = 0.0f64;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            number = number * 10.0 + (bytes[pos] - b'0') as f64;
            pos += 1;
        }
        if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            let mut scale = 0.1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                number += (bytes[pos] - b'0') as f64 * scale;
                scale /= 10.0;
                pos += 1;
            }
        }

        if pos < bytes.len() && bytes[pos] == b'%' {
            return Ok(Self::Percent(number as f32));
        }
        let px = Float::round(number).min(i32::MAX as f64);
        Ok(Self::Fixed(px as i32))
    }
}

impl FromStr for Length {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_dimension(s)
    }
}

/// Scrollbar mode of the frame element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScrollPolicy {
    /// Scrollbars always shown.
    AlwaysOn,
    /// Scrolling disabled (`scrolling="no"`).
    AlwaysOff,
    /// Scrollbars shown when content overflows.
    #[default]
    Auto,
}

impl ScrollPolicy {
    /// Anything other than [`AlwaysOff`](Self::AlwaysOff).
    pub const fn is_scrollable(&self) -> bool {
        !matches!(self, Self::AlwaysOff)
    }

    /// Map a `scrolling` attribute value, ASCII case-insensitively.
    pub fn from_attribute(value: &str) -> Result<Self, ParseError> {
        let v = value.trim_matches(|c: char| c.is_ascii_whitespace());
        if v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if v.eq_ignore_ascii_case("no")
            || v.eq_ignore_ascii_case("noscroll")
            || v.eq_ignore_ascii_case("off")
        {
            Ok(Self::AlwaysOff)
        } else {
            Err(ParseError::InvalidScrolling)
        }
    }
}

/// Configured width and height of a frame box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameStyle {
    pub width: Length,
    pub height: Length,
}

impl FrameStyle {
    /// Create a style from both dimensions.
    pub const fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    /// Both dimensions fixed: 300×150 and the like.
    pub const fn fixed(width: i32, height: i32) -> Self {
        Self::new(Length::Fixed(width), Length::Fixed(height))
    }

    /// Whether both dimensions are fixed lengths.
    pub const fn is_fully_fixed(&self) -> bool {
        self.width.is_fixed() && self.height.is_fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Length ──────────────────────────────────────────────────────────

    #[test]
    fn only_fixed_is_fixed() {
        assert!(Length::Fixed(0).is_fixed());
        assert!(!Length::Percent(100.0).is_fixed());
        assert!(!Length::Auto.is_fixed());
    }

    #[test]
    fn resolve_lengths() {
        assert_eq!(Length::Fixed(300).resolve(1000), Some(300));
        assert_eq!(Length::Percent(50.0).resolve(801), Some(401));
        assert_eq!(Length::Percent(33.3).resolve(300), Some(100));
        assert_eq!(Length::Auto.resolve(1000), None);
    }

    #[test]
    fn parse_plain_integer() {
        assert_eq!(Length::parse_dimension("300"), Ok(Length::Fixed(300)));
    }

    #[test]
    fn parse_ignores_trailing_units() {
        assert_eq!(Length::parse_dimension("  240px"), Ok(Length::Fixed(240)));
    }

    #[test]
    fn parse_fraction_rounds() {
        assert_eq!(Length::parse_dimension("12.5"), Ok(Length::Fixed(13)));
        assert_eq!(Length::parse_dimension("12.4"), Ok(Length::Fixed(12)));
    }

    #[test]
    fn parse_percent() {
        assert_eq!(Length::parse_dimension("50%"), Ok(Length::Percent(50.0)));
        assert_eq!("100%".parse::<Length>(), Ok(Length::Percent(100.0)));
    }

    #[test]
    fn parse_auto_and_empty() {
        assert_eq!(Length::parse_dimension(""), Ok(Length::Auto));
        assert_eq!(Length::parse_dimension("AUTO"), Ok(Length::Auto));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(Length::parse_dimension("wide"), Err(ParseError::InvalidLength));
        assert_eq!(Length::parse_dimension("-10"), Err(ParseError::InvalidLength));
        assert_eq!(Length::parse_dimension(".5"), Err(ParseError::InvalidLength));
    }

    #[test]
    fn parse_huge_value_clamps() {
        assert_eq!(
            Length::parse_dimension("99999999999"),
            Ok(Length::Fixed(i32::MAX))
        );
    }

    // ── ScrollPolicy ────────────────────────────────────────────────────

    #[test]
    fn scrollable_unless_always_off() {
        assert!(ScrollPolicy::AlwaysOn.is_scrollable());
        assert!(ScrollPolicy::Auto.is_scrollable());
        assert!(!ScrollPolicy::AlwaysOff.is_scrollable());
    }

    #[test]
    fn scrolling_attribute_values() {
        assert_eq!(ScrollPolicy::from_attribute("yes"), Ok(ScrollPolicy::Auto));
        assert_eq!(ScrollPolicy::from_attribute("Auto"), Ok(ScrollPolicy::Auto));
        assert_eq!(ScrollPolicy::from_attribute("no"), Ok(ScrollPolicy::AlwaysOff));
        assert_eq!(
            ScrollPolicy::from_attribute(" NOSCROLL "),
            Ok(ScrollPolicy::AlwaysOff)
        );
        assert_eq!(ScrollPolicy::from_attribute("off"), Ok(ScrollPolicy::AlwaysOff));
        assert_eq!(
            ScrollPolicy::from_attribute("sometimes"),
            Err(ParseError::InvalidScrolling)
        );
    }

    // ── FrameStyle ──────────────────────────────────────────────────────

    #[test]
    fn fully_fixed_needs_both_axes() {
        assert!(FrameStyle::fixed(300, 200).is_fully_fixed());
        assert!(!FrameStyle::new(Length::Fixed(300), Length::Auto).is_fully_fixed());
        assert!(!FrameStyle::new(Length::Percent(100.0), Length::Fixed(10)).is_fully_fixed());
        assert!(!FrameStyle::default().is_fully_fixed());
    }
}
