//! Out-of-flow positioning.
//!
//! Absolute and fixed boxes resolve directly against their container's
//! content box, independent of sibling flow. Offsets follow the toolkit's
//! zero-means-unset convention: a zero `left` is indistinguishable from an
//! unset one, so a box is right-anchored only when `left` is zero and
//! `right` is not.

use crate::geometry::Rect;
use crate::style::{clamp_size, FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::tree::NodeRef;

/// Compute and write the rectangle of one out-of-flow box.
///
/// `content` is the containing block: the parent's content box.
pub(crate) fn position_absolute(node: &NodeRef, content: Rect) {
    let style = node.style();

    // Explicit size wins; opposing offsets stretch; otherwise a default.
    let width = if style.width > 0.0 {
        style.width
    } else if style.left > 0.0 && style.right > 0.0 {
        (content.w - style.left - style.right).max(0.0)
    } else {
        FALLBACK_WIDTH
    };
    let height = if style.height > 0.0 {
        style.height
    } else if style.top > 0.0 && style.bottom > 0.0 {
        (content.h - style.top - style.bottom).max(0.0)
    } else {
        FALLBACK_HEIGHT
    };

    let width = clamp_size(width, style.min_width, style.max_width);
    let height = clamp_size(height, style.min_height, style.max_height);

    let x = if style.left > 0.0 || style.right == 0.0 {
        content.x + style.left
    } else {
        content.x + content.w - width - style.right
    };
    let y = if style.top > 0.0 || style.bottom == 0.0 {
        content.y + style.top
    } else {
        content.y + content.h - height - style.bottom
    };

    node.set_rect(Rect::new(x, y, width, height));
}

// =============================================================================
// Tests
// =============================================================================
