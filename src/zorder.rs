//! Sibling z-ordering for painting and hit-testing.
//!
//! Both orders are stable sorts over a snapshot of the visible siblings:
//! ascending z-index for paint (back to front), descending for hit-testing
//! (front to back). Ties preserve insertion order. When no sibling declares
//! a non-zero z-index the snapshot is returned as-is.

use std::cmp::Reverse;

use crate::tree::NodeRef;

fn visible_snapshot(siblings: &[NodeRef]) -> Vec<NodeRef> {
    siblings.iter().filter(|n| n.is_visible()).cloned().collect()
}

fn any_layered(nodes: &[NodeRef]) -> bool {
    nodes.iter().any(|n| n.style().z_index != 0)
}

/// Visible siblings in back-to-front paint order.
pub fn paint_order(siblings: &[NodeRef]) -> Vec<NodeRef> {
    let mut nodes = visible_snapshot(siblings);
    if any_layered(&nodes) {
        nodes.sort_by_key(|n| n.style().z_index);
    }
    nodes
}

/// Visible siblings in front-to-back hit-test order.
pub fn hit_test_order(siblings: &[NodeRef]) -> Vec<NodeRef> {
    let mut nodes = visible_snapshot(siblings);
    if any_layered(&nodes) {
        nodes.sort_by_key(|n| Reverse(n.style().z_index));
    }
    nodes
}

/// Resolve a pointer position to the frontmost box containing it.
///
/// Descends depth-first through [`hit_test_order`], so a deeper descendant
/// of a front sibling beats the sibling itself. Rectangles come from the
/// last layout pass; run [`crate::layout`] first.
pub fn hit_test(node: &NodeRef, x: f32, y: f32) -> Option<NodeRef> {
    if !node.is_visible() {
        return None;
    }
    for child in hit_test_order(&node.children()) {
        if let Some(hit) = hit_test(&child, x, y) {
            return Some(hit);
        }
    }
    if node.rect().contains(x, y) {
        Some(node.clone())
    } else {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
