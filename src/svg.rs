//! SVG diagnostics for a single iframe layout pass.
//!
//! Draws a vertical sequence of annotated panels: the host viewport with
//! the iframe's bounds inside it, the baseline box, and the final box.
//! When the frame was flattened the growth beyond the baseline is hatched.
//!
//! # Example
//!
//! ```
//! use zenframe::svg::render_layout_svg;
//! use zenframe::{Decision, FrameLayout, HostViewport, Rect, Size};
//!
//! let viewport = HostViewport::at_origin(Size::new(320, 480));
//! let layout = FrameLayout {
//!     decision: Decision::Flatten,
//!     baseline: Size::new(300, 150),
//!     size: Size::new(300, 800),
//! };
//! let svg = render_layout_svg(&viewport, Rect::new(10, 40, 300, 150), &layout);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("Flattened  300×800"));
//! ```

use crate::geometry::{Rect, Size};
use crate::host::HostViewport;
use crate::policy::{Decision, FrameLayout};

/// Maximum pixel width for any panel.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels, including the arrow.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top and bottom margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of the label line above each panel.
const LABEL_H: f64 = 22.0;

struct Panel {
    label: String,
    outer: Size,
    /// Highlighted region inside `outer`, in the panel's own coordinates.
    inner: Option<Rect>,
    annotation: String,
    /// Portion of `outer` that existed before flattening; the rest is hatched.
    grown_from: Option<Size>,
    /// Draw `outer` as background rather than as the frame itself.
    backdrop: bool,
}

/// Render an SVG document describing one [`FrameLayout`].
///
/// `bounds` is the frame's absolute bounding box at decision time.
pub fn render_layout_svg(viewport: &HostViewport, bounds: Rect, layout: &FrameLayout) -> String {
    let panels = build_panels(viewport, bounds, layout);
    render_panels(&panels)
}

fn build_panels(viewport: &HostViewport, bounds: Rect, layout: &FrameLayout) -> Vec<Panel> {
    let mut panels = Vec::new();
    let visible = viewport.visible_rect();

    let relative = Rect::new(
        bounds.x.saturating_sub(visible.x),
        bounds.y.saturating_sub(visible.y),
        bounds.width,
        bounds.height,
    );
    let on_screen = bounds.intersects(&visible);
    panels.push(Panel {
        label: format!("Viewport  {}×{}", visible.width, visible.height),
        outer: visible.size(),
        inner: on_screen.then(|| clip_to(relative, visible.size())),
        annotation: format!(
            "scroll ({}, {}), frame at ({}, {}){}",
            visible.x,
            visible.y,
            bounds.x,
            bounds.y,
            if on_screen { "" } else { ", offscreen" }
        ),
        grown_from: None,
        backdrop: true,
    });

    panels.push(Panel {
        label: format!("Baseline  {}×{}", layout.baseline.width, layout.baseline.height),
        outer: layout.baseline,
        inner: None,
        annotation: String::new(),
        grown_from: None,
        backdrop: false,
    });

    match layout.decision {
        Decision::Flatten => panels.push(Panel {
            label: format!("Flattened  {}×{}", layout.size.width, layout.size.height),
            outer: layout.size,
            inner: None,
            annotation: format!(
                "+{} wide, +{} tall",
                layout.size.width.saturating_sub(layout.baseline.width),
                layout.size.height.saturating_sub(layout.baseline.height)
            ),
            grown_from: Some(layout.baseline),
            backdrop: false,
        }),
        Decision::Skip(reason) => panels.push(Panel {
            label: format!("Output  {}×{}", layout.size.width, layout.size.height),
            outer: layout.size,
            inner: None,
            annotation: format!("not flattened: {}", reason.as_str()),
            grown_from: None,
            backdrop: false,
        }),
    }

    panels
}

/// Clip `r` to `(0, 0, size)`. The result never has negative extent.
fn clip_to(r: Rect, size: Size) -> Rect {
    let (w, h) = (size.width.max(0), size.height.max(0));
    let x = r.x.clamp(0, w);
    let y = r.y.clamp(0, h);
    let right = r.right().clamp(x, w);
    let bottom = r.bottom().clamp(y, h);
    Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
}

/// Scale a size into the panel box, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let w = size.width.max(0) as f64;
    let h = size.height.max(0) as f64;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_panels(panels: &[Panel]) -> String {
    let n = panels.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H) + (n - 1.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32,
        total_h as u32,
        total_w,
        total_h
    ));
    svg.push('\n');

    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .frame { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .grown { fill: url(#hatch); stroke: #7baed0; stroke-width: 1; stroke-dasharray: 4,2; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .frame { fill: #3a72a4; stroke: #5a9fd4; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
  <pattern id="hatch" width="6" height="6" patternUnits="userSpaceOnUse" patternTransform="rotate(45)">
    <rect width="6" height="6" fill="#b8d4ee"/>
    <line x1="0" y1="0" x2="0" y2="6" stroke="#7baed0" stroke-width="2"/>
  </pattern>
</defs>
"##);

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for (i, panel) in panels.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (pw, ph, scale) = scale_to_fit(panel.outer);
        let px = center_x - pw / 2.0;
        let py = y;

        match (&panel.inner, panel.grown_from) {
            (Some(inner), _) => {
                push_rect(&mut svg, px, py, pw, ph, "outer");
                push_rect(
                    &mut svg,
                    px + inner.x as f64 * scale,
                    py + inner.y as f64 * scale,
                    inner.width as f64 * scale,
                    inner.height as f64 * scale,
                    "frame",
                );
            }
            (None, Some(before)) => {
                push_rect(&mut svg, px, py, pw, ph, "grown");
                push_rect(
                    &mut svg,
                    px,
                    py,
                    before.width.max(0) as f64 * scale,
                    before.height.max(0) as f64 * scale,
                    "frame",
                );
            }
            (None, None) if panel.backdrop => push_rect(&mut svg, px, py, pw, ph, "outer"),
            (None, None) => push_rect(&mut svg, px, py, pw, ph, "frame"),
        }

        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                py + ph + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H;

        if i < panels.len() - 1 {
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x,
                y + 8.0,
                center_x,
                y + PANEL_GAP - 8.0
            ));
            svg.push('\n');
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_rect(svg: &mut String, x: f64, y: f64, w: f64, h: f64, class: &str) {
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="{class}" rx="2"/>"#
    ));
    svg.push('\n');
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::policy::SkipReason;

    fn viewport() -> HostViewport {
        HostViewport::at_origin(Size::new(320, 480))
    }

    #[test]
    fn flattened_layout_has_three_panels() {
        let layout = FrameLayout {
            decision: Decision::Flatten,
            baseline: Size::new(300, 150),
            size: Size::new(300, 800),
        };
        let svg = render_layout_svg(&viewport(), Rect::new(10, 10, 300, 150), &layout);
        assert!(svg.contains("Viewport  320×480"));
        assert!(svg.contains("Baseline  300×150"));
        assert!(svg.contains("Flattened  300×800"));
        assert!(svg.contains("+0 wide, +650 tall"));
        assert!(svg.contains(r#"class="grown""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn skipped_layout_names_reason() {
        let layout = FrameLayout {
            decision: Decision::Skip(SkipReason::Offscreen),
            baseline: Size::new(300, 150),
            size: Size::new(300, 150),
        };
        let svg = render_layout_svg(&viewport(), Rect::new(0, 2000, 300, 150), &layout);
        assert!(svg.contains("Output  300×150"));
        assert!(svg.contains("not flattened: offscreen"));
        assert!(svg.contains(", offscreen"));
        assert!(!svg.contains(r#"class="grown""#));
    }

    #[test]
    fn scrolled_viewport_offsets_frame() {
        let vp = HostViewport::new(Point::new(0, 400), Size::new(320, 480));
        let layout = FrameLayout {
            decision: Decision::Flatten,
            baseline: Size::new(100, 100),
            size: Size::new(100, 100),
        };
        let svg = render_layout_svg(&vp, Rect::new(0, 450, 100, 100), &layout);
        assert!(svg.contains("scroll (0, 400), frame at (0, 450)"));
    }

    #[test]
    fn extreme_offscreen_bounds_render() {
        let vp = HostViewport::new(Point::new(0, 10), Size::new(320, 480));
        let layout = FrameLayout {
            decision: Decision::Skip(SkipReason::Offscreen),
            baseline: Size::new(300, 150),
            size: Size::new(300, 150),
        };
        let svg = render_layout_svg(&vp, Rect::new(0, i32::MIN, 300, 150), &layout);
        assert!(svg.contains("not flattened: offscreen"));

        let far = render_layout_svg(&vp, Rect::new(i32::MAX, i32::MAX, 300, 150), &layout);
        assert!(far.contains(", offscreen"));
    }

    #[test]
    fn extreme_growth_annotation_saturates() {
        let layout = FrameLayout {
            decision: Decision::Flatten,
            baseline: Size::new(-10, i32::MIN),
            size: Size::new(i32::MAX, i32::MAX),
        };
        let svg = render_layout_svg(&viewport(), Rect::new(0, 0, 300, 150), &layout);
        assert!(svg.contains(&format!("+{} wide, +{} tall", i32::MAX, i32::MAX)));
    }

    #[test]
    fn clip_never_goes_negative() {
        assert_eq!(
            clip_to(Rect::new(500, 500, 10, 10), Size::new(320, 480)),
            Rect::new(320, 480, 0, 0)
        );
        assert_eq!(
            clip_to(Rect::new(10, 10, 10, 10), Size::new(-5, -5)),
            Rect::new(0, 0, 0, 0)
        );
    }

    #[test]
    fn clip_keeps_visible_part() {
        let clipped = clip_to(Rect::new(-10, 470, 50, 50), Size::new(320, 480));
        assert_eq!(clipped, Rect::new(0, 470, 40, 10));
    }

    #[test]
    fn escape_xml_specials() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
