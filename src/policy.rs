//! Frame flattening: sizing an iframe to its embedded document.
//!
//! When an iframe's content is itself a frameset, showing it in a small
//! scroll region with its own scrollbars is hard to use on touch devices.
//! Flattening grows the iframe box to the embedded document's full extent
//! so the page scrolls instead.
//!
//! Each call re-reads the host's current state and keeps nothing between
//! reflows. Missing inputs (no embedded view, no page, no viewport) turn
//! flattening off; they are never errors.
//!
//! # Example
//!
//! ```
//! use zenframe::{FlattenPolicy, FlatteningStrategy, flattened_extent};
//!
//! let policy = FlattenPolicy::default();
//! assert_eq!(policy.strategy, FlatteningStrategy::FramesetContent);
//!
//! // Height only grows: 150 baseline, 800 of content, 2+2 border.
//! assert_eq!(flattened_extent(150, 800, 4), 804);
//! assert_eq!(flattened_extent(900, 800, 4), 900);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Size;
use crate::host::{EmbeddedView, FrameBox, FramePage};

/// What turns flattening on for an iframe that is otherwise a candidate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlatteningStrategy {
    /// Only when the embedded document's root is a frameset.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "frameset"))]
    FramesetContent,
    /// When the owning page's frame flattening setting is on.
    #[cfg_attr(feature = "serde", serde(rename = "setting"))]
    PageSetting,
    /// Either of the above.
    #[cfg_attr(feature = "serde", serde(rename = "setting-or-frameset"))]
    SettingOrFrameset,
    /// Never flatten.
    #[cfg_attr(feature = "serde", serde(rename = "never"))]
    Never,
}

impl FlatteningStrategy {
    /// Configuration name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FramesetContent => "frameset",
            Self::PageSetting => "setting",
            Self::SettingOrFrameset => "setting-or-frameset",
            Self::Never => "never",
        }
    }

    fn enables<B: FrameBox>(&self, frame: &B) -> bool {
        let frameset = || frame.embedded_view().is_some_and(|v| v.root_is_frameset());
        let setting = || frame.page().is_some_and(|p| p.frame_flattening_enabled());
        match self {
            Self::FramesetContent => frameset(),
            Self::PageSetting => setting(),
            Self::SettingOrFrameset => setting() || frameset(),
            Self::Never => false,
        }
    }
}

impl fmt::Display for FlatteningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlatteningStrategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [
            Self::FramesetContent,
            Self::PageSetting,
            Self::SettingOrFrameset,
            Self::Never,
        ]
        .into_iter()
        .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
        .ok_or(ParseError::UnknownStrategy)
    }
}

/// Why an iframe was not flattened. Checked in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The box does not belong to an `<iframe>`.
    NotIframe,
    /// Scrolling is off and both width and height are fixed.
    FullyConstrained,
    /// The configured strategy did not enable flattening.
    StrategyDisabled,
    /// The containing document has no page.
    NoPage,
    /// The page's main frame has no viewport.
    NoMainViewport,
    /// The box lies entirely outside the visible viewport.
    Offscreen,
}

impl SkipReason {
    /// Short identifier for logs and diagnostics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotIframe => "not-iframe",
            Self::FullyConstrained => "fully-constrained",
            Self::StrategyDisabled => "strategy-disabled",
            Self::NoPage => "no-page",
            Self::NoMainViewport => "no-main-viewport",
            Self::Offscreen => "offscreen",
        }
    }
}

/// Outcome of [`FlattenPolicy::evaluate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Size the box from its embedded content.
    Flatten,
    /// Use ordinary layout.
    Skip(SkipReason),
}

impl Decision {
    /// Whether this is [`Decision::Flatten`].
    pub const fn flattens(&self) -> bool {
        matches!(self, Self::Flatten)
    }

    /// The reason flattening was skipped, if it was.
    pub const fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Flatten => None,
            Self::Skip(reason) => Some(*reason),
        }
    }
}

/// Result of one [`FlattenPolicy::layout`] pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameLayout {
    /// Whether the flattening path ran.
    pub decision: Decision,
    /// Size from ordinary box-model sizing, before any flattening.
    pub baseline: Size,
    /// Size after layout.
    pub size: Size,
}

impl FrameLayout {
    /// Whether flattening made the box larger than its baseline.
    pub fn grew(&self) -> bool {
        self.size.width > self.baseline.width || self.size.height > self.baseline.height
    }
}

/// Extent of a flattened axis: the content plus borders, but never less
/// than the baseline.
pub fn flattened_extent(baseline: i32, contents: i32, border: i32) -> i32 {
    baseline.max(contents.saturating_add(border))
}

#[derive(Copy, Clone, Debug)]
enum Axis {
    Width,
    Height,
}

impl Axis {
    const fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Iframe sizing policy.
///
/// Cheap to copy; hosts usually keep one per document and hand it to
/// every iframe box they lay out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlattenPolicy {
    /// What enables flattening for a candidate iframe.
    pub strategy: FlatteningStrategy,
}

impl FlattenPolicy {
    /// Create a policy with the given strategy.
    pub const fn new(strategy: FlatteningStrategy) -> Self {
        Self { strategy }
    }

    /// Replace the strategy.
    pub const fn with_strategy(mut self, strategy: FlatteningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Whether `frame` should be sized from its embedded content.
    pub fn should_flatten<B: FrameBox>(&self, frame: &B) -> bool {
        self.evaluate(frame).flattens()
    }

    /// Run the flattening gates in order and report the first that fails.
    pub fn evaluate<B: FrameBox>(&self, frame: &B) -> Decision {
        let decision = self.decide(frame);
        if let Decision::Skip(reason) = decision {
            tracing::debug!(reason = reason.as_str(), "frame flattening skipped");
        }
        decision
    }

    fn decide<B: FrameBox>(&self, frame: &B) -> Decision {
        if !frame.is_iframe() {
            return Decision::Skip(SkipReason::NotIframe);
        }

        if !frame.scroll_policy().is_scrollable() && frame.style().is_fully_fixed() {
            return Decision::Skip(SkipReason::FullyConstrained);
        }

        if !self.strategy.enables(frame) {
            return Decision::Skip(SkipReason::StrategyDisabled);
        }

        let Some(page) = frame.page() else {
            return Decision::Skip(SkipReason::NoPage);
        };
        let Some(viewport) = page.main_viewport() else {
            return Decision::Skip(SkipReason::NoMainViewport);
        };

        // Offscreen frames are left alone; laying them out flattened is wasted work.
        if !frame
            .absolute_bounding_box()
            .intersects(&viewport.visible_rect())
        {
            return Decision::Skip(SkipReason::Offscreen);
        }

        Decision::Flatten
    }

    /// Compute the box's width, growing it to the embedded content when
    /// flattening applies.
    ///
    /// Always runs the host's baseline width computation first. Returns the
    /// new width if it was overridden.
    pub fn compute_logical_width<B: FrameBox>(&self, frame: &mut B) -> Option<i32> {
        frame.compute_baseline_width();
        if !self.should_flatten(frame) {
            return None;
        }
        self.flatten_axis(frame, Axis::Width)
    }

    /// Compute the box's height, growing it to the embedded content when
    /// flattening applies.
    ///
    /// A non-scrollable frame with a fixed height keeps its height even
    /// when its width flattens.
    pub fn compute_logical_height<B: FrameBox>(&self, frame: &mut B) -> Option<i32> {
        frame.compute_baseline_height();
        if !self.should_flatten(frame) {
            return None;
        }
        self.flatten_axis(frame, Axis::Height)
    }

    fn flatten_axis<B: FrameBox>(&self, frame: &mut B, axis: Axis) -> Option<i32> {
        let style = frame.style();
        let fixed = match axis {
            Axis::Width => style.width.is_fixed(),
            Axis::Height => style.height.is_fixed(),
        };
        if !frame.scroll_policy().is_scrollable() && fixed {
            return None;
        }

        let contents = frame.embedded_view()?.contents_size();
        let border = frame.border();
        let size = frame.size();
        let (baseline, content, border) = match axis {
            Axis::Width => (size.width, contents.width, border.horizontal()),
            Axis::Height => (size.height, contents.height, border.vertical()),
        };

        let extent = flattened_extent(baseline, content, border);
        match axis {
            Axis::Width => frame.set_width(extent),
            Axis::Height => frame.set_height(extent),
        }
        tracing::debug!(
            axis = axis.name(),
            baseline,
            contents = content,
            border,
            extent,
            "flattened frame axis"
        );
        Some(extent)
    }

    /// Lay out `frame` for one reflow.
    ///
    /// Runs baseline sizing, then either the host's flattening layout or its
    /// standard frame-owner layout, then recomputes overflow, refreshes the
    /// layer transform and clears the needs-layout flag.
    #[tracing::instrument(level = "trace", skip_all, fields(strategy = %self.strategy))]
    pub fn layout<B: FrameBox>(&self, frame: &mut B) -> FrameLayout {
        debug_assert!(frame.needs_layout(), "layout called on a clean frame box");

        frame.compute_baseline_width();
        frame.compute_baseline_height();
        let baseline = frame.size();

        let decision = self.evaluate(frame);
        if decision.flattens() {
            let style = frame.style();
            frame.layout_with_flattening(style.width.is_fixed(), style.height.is_fixed());
        } else {
            frame.standard_frame_owner_layout();
        }

        frame.clear_overflow();
        frame.add_shadow_overflow();
        frame.update_layer_transform();
        frame.set_needs_layout(false);

        FrameLayout {
            decision,
            baseline,
            size: frame.size(),
        }
    }
}
