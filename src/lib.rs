//! # quill-layout
//!
//! Flexbox layout engine for the Quill retained-mode UI toolkit.
//!
//! Given a tree of boxes, each carrying a style record, a layout pass
//! computes an absolute screen-space rectangle for every box. The renderer
//! and the pointer hit-tester consume those rectangles downstream.
//!
//! ## Architecture
//!
//! One pass is a single synchronous pre-order walk:
//!
//! ```text
//! Box tree + Style records → layout() → computed Rect per box
//! ```
//!
//! - `engine` - the recursive layout driver ([`layout`], [`layout_children`])
//! - `flex` - flex line building (wrap) and single-line solving
//! - `absolute` - out-of-flow positioning
//! - [`zorder`] - sibling paint/hit ordering and pointer hit resolution
//! - [`tree`] - the box tree ([`BoxNode`])
//! - [`style`] - the style record ([`Style`]) and layout enums
//! - [`geometry`] - [`Rect`] and [`Edges`] value types
//!
//! Style records are immutable snapshots for the duration of a pass; the
//! engine is the exclusive writer of computed rectangles while it runs.
//! Text measurement, painting, event dispatch, and style cascading are the
//! surrounding framework's concern, not this crate's.
//!
//! ## Example
//!
//! ```
//! use quill_layout::{layout, BoxNode, Style};
//!
//! let child = BoxNode::new(Style {
//!     flex_grow: 1.0,
//!     ..Style::default()
//! });
//! let root = BoxNode::with_children(Style::default(), vec![child.clone()]);
//!
//! layout(&root, 800.0, 600.0);
//! assert_eq!(child.rect().w, 800.0);
//! ```

mod absolute;
mod engine;
mod flex;
pub mod geometry;
pub mod style;
pub mod tree;
pub mod zorder;

pub use engine::{layout, layout_children};
pub use geometry::{Edges, Rect};
pub use style::{
    Align, Direction, Display, FlexWrap, Justify, Position, Style, FALLBACK_HEIGHT,
    FALLBACK_WIDTH,
};
pub use tree::{BoxNode, NodeRef};
pub use zorder::{hit_test, hit_test_order, paint_order};
