//! The layout driver.
//!
//! A pass is one synchronous pre-order walk: a parent's rectangle is
//! finalized before its children derive available space from it. Per node:
//!
//! 1. Compute the content box (border-box model: origin shifted by
//!    padding + border, extent reduced by both).
//! 2. Partition children into flow and out-of-flow, dropping `display: none`
//!    boxes entirely.
//! 3. Position out-of-flow children against the content box.
//! 4. Solve flow children as one line, or wrap them into lines first.
//! 5. Recurse.

use log::trace;

use crate::absolute::position_absolute;
use crate::flex::{build_lines, solve_line};
use crate::geometry::Rect;
use crate::style::{Display, FlexWrap};
use crate::tree::NodeRef;

/// Run a full layout pass over the tree.
///
/// The root's rectangle is the container, narrowed by the root's own
/// explicit width/height when set. The root's margin offsets its position
/// without shrinking its box, matching block-margin semantics. Every
/// reachable box gets its computed rectangle overwritten.
pub fn layout(root: &NodeRef, container_width: f32, container_height: f32) {
    trace!(
        "layout pass: container {}x{}",
        container_width, container_height
    );

    let style = root.style();
    if style.display == Display::None {
        return;
    }

    let w = if style.width > 0.0 {
        style.width
    } else {
        container_width
    };
    let h = if style.height > 0.0 {
        style.height
    } else {
        container_height
    };
    root.set_rect(Rect::new(
        style.margin.left,
        style.margin.top,
        w.max(0.0),
        h.max(0.0),
    ));

    layout_children(root);
}

/// Lay out a node's subtree against its already-computed rectangle.
///
/// Public so hosts can relayout a subtree incrementally after a local
/// style change, without touching the rest of the tree.
pub fn layout_children(parent: &NodeRef) {
    let style = parent.style();
    let rect = parent.rect();

    let inset = style.border_width;
    let content = Rect::new(
        rect.x + style.padding.left + inset,
        rect.y + style.padding.top + inset,
        (rect.w - style.padding.horizontal() - 2.0 * inset).max(0.0),
        (rect.h - style.padding.vertical() - 2.0 * inset).max(0.0),
    );

    let children = parent.children();
    let mut flow: Vec<NodeRef> = Vec::with_capacity(children.len());

    for child in &children {
        let child_style = child.style();
        if child_style.display == Display::None {
            // Excluded before any sizing arithmetic; keeps its zero rect
            continue;
        }
        if child_style.position.is_out_of_flow() {
            position_absolute(child, content);
        } else {
            flow.push(child.clone());
        }
    }

    if !flow.is_empty() {
        let (main_avail, cross_avail) = if style.direction.is_row() {
            (content.w, content.h)
        } else {
            (content.h, content.w)
        };

        match style.flex_wrap {
            FlexWrap::NoWrap => {
                solve_line(&flow, content, main_avail, cross_avail, 0.0, &style);
            }
            FlexWrap::Wrap | FlexWrap::WrapReverse => {
                let mut lines = build_lines(&flow, main_avail, style.gap, style.direction);
                if style.flex_wrap == FlexWrap::WrapReverse {
                    // Reverse line order, not intra-line order
                    lines.reverse();
                }

                // Each line aligns within an equal cross share, but lines
                // stack by measured thickness plus one gap.
                let line_cross = cross_avail / lines.len() as f32;
                let mut cursor = 0.0;
                for line in &lines {
                    let thickness =
                        solve_line(line, content, main_avail, line_cross, cursor, &style);
                    cursor += thickness + style.gap;
                }
            }
        }
    }

    for child in &children {
        if child.is_visible() {
            layout_children(child);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
