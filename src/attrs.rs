//! Iframe element attribute parsing.
//!
//! Turns the presentational attributes of an `<iframe>` (`scrolling`,
//! `width`, `height`, `frameborder`) into the inputs the flattening policy
//! reads. Malformed values never fail the parse; they are reported as
//! warnings and the previous value is kept.
//!
//! # Example
//!
//! ```
//! use zenframe::attrs::parse_attributes;
//! use zenframe::{Length, ScrollPolicy};
//!
//! let parsed = parse_attributes([
//!     ("src", "/menu.html"),
//!     ("scrolling", "no"),
//!     ("width", "300"),
//!     ("height", "50%"),
//! ]);
//! assert!(parsed.warnings.is_empty());
//!
//! let attrs = parsed.attributes;
//! assert_eq!(attrs.scrolling, ScrollPolicy::AlwaysOff);
//! assert_eq!(attrs.width, Length::Fixed(300));
//! assert_eq!(attrs.height, Length::Percent(50.0));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ParseError;
use crate::geometry::Edges;
use crate::style::{FrameStyle, Length, ScrollPolicy};

/// Border width of an iframe whose `frameborder` is on.
pub const DEFAULT_FRAME_BORDER: i32 = 2;

/// Parsed iframe attributes, with HTML defaults for anything absent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameAttributes {
    pub scrolling: ScrollPolicy,
    pub width: Length,
    pub height: Length,
    /// Whether the default frame border is drawn.
    pub frameborder: bool,
}

impl Default for FrameAttributes {
    fn default() -> Self {
        Self {
            scrolling: ScrollPolicy::Auto,
            width: Length::Auto,
            height: Length::Auto,
            frameborder: true,
        }
    }
}

impl FrameAttributes {
    /// Width and height as a [`FrameStyle`].
    pub fn style(&self) -> FrameStyle {
        FrameStyle::new(self.width, self.height)
    }

    /// Border implied by `frameborder`.
    pub fn border(&self) -> Edges {
        if self.frameborder {
            Edges::uniform(DEFAULT_FRAME_BORDER)
        } else {
            Edges::ZERO
        }
    }
}

/// Result of parsing an attribute list.
#[derive(Debug, Clone)]
pub struct AttributeParse {
    /// Parsed attributes.
    pub attributes: FrameAttributes,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from attribute parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// An attribute appeared more than once (last value wins).
    DuplicateAttribute { name: &'static str, value: String },
    /// An attribute was recognized but its value could not be parsed.
    ValueInvalid {
        name: &'static str,
        value: String,
        error: ParseError,
    },
}

/// Parse `(name, value)` pairs from an `<iframe>` element.
///
/// Names are matched ASCII case-insensitively. Attributes that do not
/// affect sizing (`src`, `name`, `sandbox`, ...) are ignored.
pub fn parse_attributes<'a, I>(attributes: I) -> AttributeParse
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut parsed = FrameAttributes::default();
    let mut warnings = Vec::new();
    let mut seen = Seen::default();

    for (name, value) in attributes {
        let Some(key) = Key::from_name(name) else {
            continue;
        };
        if seen.mark(key) {
            warnings.push(ParseWarning::DuplicateAttribute {
                name: key.name(),
                value: String::from(value),
            });
        }
        apply(key, value, &mut parsed, &mut warnings);
    }

    AttributeParse {
        attributes: parsed,
        warnings,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Key {
    Scrolling,
    Width,
    Height,
    FrameBorder,
}

impl Key {
    fn from_name(name: &str) -> Option<Self> {
        [Self::Scrolling, Self::Width, Self::Height, Self::FrameBorder]
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Scrolling => "scrolling",
            Self::Width => "width",
            Self::Height => "height",
            Self::FrameBorder => "frameborder",
        }
    }
}

#[derive(Default)]
struct Seen {
    scrolling: bool,
    width: bool,
    height: bool,
    frameborder: bool,
}

impl Seen {
    /// Record `key`; true if it was already present.
    fn mark(&mut self, key: Key) -> bool {
        let slot = match key {
            Key::Scrolling => &mut self.scrolling,
            Key::Width => &mut self.width,
            Key::Height => &mut self.height,
            Key::FrameBorder => &mut self.frameborder,
        };
        core::mem::replace(slot, true)
    }
}

fn apply(key: Key, value: &str, attrs: &mut FrameAttributes, warnings: &mut Vec<ParseWarning>) {
    let result = match key {
        Key::Scrolling => ScrollPolicy::from_attribute(value).map(|s| attrs.scrolling = s),
        Key::Width => Length::parse_dimension(value).map(|l| attrs.width = l),
        Key::Height => Length::parse_dimension(value).map(|l| attrs.height = l),
        Key::FrameBorder => {
            attrs.frameborder = parse_frameborder(value);
            Ok(())
        }
    };
    if let Err(error) = result {
        warnings.push(ParseWarning::ValueInvalid {
            name: key.name(),
            value: String::from(value),
            error,
        });
    }
}

fn parse_frameborder(value: &str) -> bool {
    let v = value.trim_matches(|c: char| c.is_ascii_whitespace());
    !(v == "0" || v.eq_ignore_ascii_case("no"))
}
