//! Capabilities the host layout engine provides to the policy.
//!
//! The engine owns the box tree, the embedded documents and the page. The
//! policy only reads snapshots through these traits and drives the host's
//! own sizing and layout routines.

use crate::geometry::{Edges, Point, Rect, Size};
use crate::style::{FrameStyle, ScrollPolicy};

/// The top-level page's scrolled viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HostViewport {
    /// Document position of the viewport's top-left corner.
    pub scroll_origin: Point,
    /// Extent of the visible area.
    pub visible_size: Size,
}

impl HostViewport {
    /// Create a viewport.
    pub const fn new(scroll_origin: Point, visible_size: Size) -> Self {
        Self {
            scroll_origin,
            visible_size,
        }
    }

    /// Unscrolled viewport of the given size.
    pub const fn at_origin(visible_size: Size) -> Self {
        Self::new(Point::ORIGIN, visible_size)
    }

    /// The visible area in document coordinates.
    pub const fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll_origin, self.visible_size)
    }
}

/// The rendered view of a frame's embedded document.
pub trait EmbeddedView {
    /// Full scrollable extent of the embedded document.
    fn contents_size(&self) -> Size;

    /// Whether the embedded document's root content is a `<frameset>`.
    fn root_is_frameset(&self) -> bool;
}

/// The page that owns the frame's document.
pub trait FramePage {
    /// The main frame's viewport, if it has one yet.
    fn main_viewport(&self) -> Option<HostViewport>;

    /// Page-wide frame flattening setting.
    fn frame_flattening_enabled(&self) -> bool;
}

/// A frame-owning box in the host's layout tree.
pub trait FrameBox {
    type View: EmbeddedView;
    type Page: FramePage;

    /// Whether the owning element is an `<iframe>`.
    fn is_iframe(&self) -> bool;

    /// Configured width and height.
    fn style(&self) -> FrameStyle;

    /// Scrollbar mode of the owning element.
    fn scroll_policy(&self) -> ScrollPolicy;

    /// Computed border widths.
    fn border(&self) -> Edges;

    /// Current border-box size.
    fn size(&self) -> Size;

    fn set_width(&mut self, width: i32);

    fn set_height(&mut self, height: i32);

    /// Current border-box rectangle in document coordinates.
    fn absolute_bounding_box(&self) -> Rect;

    /// The embedded document's view. `None` until the frame has loaded.
    fn embedded_view(&self) -> Option<&Self::View>;

    /// The page of the document that contains this box.
    fn page(&self) -> Option<&Self::Page>;

    /// Standard box-model width computation; updates [`size`](Self::size).
    fn compute_baseline_width(&mut self);

    /// Standard box-model height computation; updates [`size`](Self::size).
    fn compute_baseline_height(&mut self);

    /// Ordinary frame-owner layout that sizes the embedded view to the box.
    fn standard_frame_owner_layout(&mut self);

    /// Two-pass layout that lets non-fixed axes grow to fit the embedded
    /// content. The host may call back into
    /// [`FlattenPolicy::compute_logical_width`](crate::FlattenPolicy::compute_logical_width)
    /// and its height counterpart from here.
    fn layout_with_flattening(&mut self, width_fixed: bool, height_fixed: bool);

    fn clear_overflow(&mut self);

    /// Re-add overflow from box shadows and other decorations.
    fn add_shadow_overflow(&mut self);

    /// Refresh the cached transform used for compositing.
    fn update_layer_transform(&mut self);

    fn needs_layout(&self) -> bool;

    fn set_needs_layout(&mut self, needs_layout: bool);
}
