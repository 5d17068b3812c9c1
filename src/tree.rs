//! The box tree the engine operates on.
//!
//! Topology is a rooted, ordered, finite, acyclic tree: parents own their
//! children, children hold a weak back-reference for navigation only. Each
//! node carries a shared style record and a computed-rectangle slot that the
//! layout engine is the exclusive writer of during a pass.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::geometry::Rect;
use crate::style::{Display, Style};

/// Shared handle to a box node.
pub type NodeRef = Rc<BoxNode>;

/// One box in the retained widget tree.
///
/// The computed rect starts zero-valued and is overwritten exactly once per
/// full pass per node; the engine retains no history between passes.
#[derive(Debug)]
pub struct BoxNode {
    style: RefCell<Rc<Style>>,
    parent: RefCell<Weak<BoxNode>>,
    children: RefCell<Vec<NodeRef>>,
    rect: Cell<Rect>,
}

impl BoxNode {
    /// Create a detached node with the given style.
    pub fn new(style: Style) -> NodeRef {
        Rc::new(Self {
            style: RefCell::new(Rc::new(style)),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            rect: Cell::new(Rect::ZERO),
        })
    }

    /// Create a node and attach the given children in order.
    pub fn with_children(style: Style, children: Vec<NodeRef>) -> NodeRef {
        let node = Self::new(style);
        for child in children {
            node.push_child(child);
        }
        node
    }

    /// Append a child, re-parenting it onto this node.
    pub fn push_child(self: &Rc<Self>, child: NodeRef) {
        *child.parent.borrow_mut() = Rc::downgrade(self);
        self.children.borrow_mut().push(child);
    }

    /// The node's current style record.
    pub fn style(&self) -> Rc<Style> {
        self.style.borrow().clone()
    }

    /// Replace the style record.
    ///
    /// Must not be called while a pass is running; the change takes effect
    /// on the next pass.
    pub fn set_style(&self, style: Style) {
        *self.style.borrow_mut() = Rc::new(style);
    }

    /// The parent node, if attached.
    pub fn parent(&self) -> Option<NodeRef> {
        self.parent.borrow().upgrade()
    }

    /// Snapshot of the ordered children.
    pub fn children(&self) -> Vec<NodeRef> {
        self.children.borrow().clone()
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    /// The absolute rectangle computed by the last layout pass.
    pub fn rect(&self) -> Rect {
        self.rect.get()
    }

    /// Write the computed rectangle. Called by the layout engine only.
    pub fn set_rect(&self, rect: Rect) {
        self.rect.set(rect);
    }

    /// Whether this box participates in layout at all.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.style.borrow().display != Display::None
    }
}

// =============================================================================
// Tests
// =============================================================================
