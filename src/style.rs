//! The style record consumed by the layout engine.
//!
//! A [`Style`] is produced by the surrounding framework (cascade, animation
//! timer) and treated as an immutable snapshot for the duration of one layout
//! pass. The engine reads it; it never writes it.
//!
//! Numeric fields follow the toolkit's zero-means-unset convention:
//! `width == 0` is auto, `min_width == 0` is unconstrained, and an offset of
//! zero is indistinguishable from an unset offset.

use crate::geometry::Edges;

// =============================================================================
// Engine defaults
// =============================================================================

/// Main-axis fallback for a row child with no explicit width and no grow,
/// and the default width of an unanchored absolute box.
pub const FALLBACK_WIDTH: f32 = 50.0;

/// Main-axis fallback for a column child with no explicit height and no grow,
/// and the default height of an unanchored absolute box.
pub const FALLBACK_HEIGHT: f32 = 30.0;

// =============================================================================
// Layout enums
// =============================================================================

/// Direction flex children are sequenced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Row = 0,
    Column = 1,
}

impl Direction {
    /// Check if the main axis is horizontal.
    #[inline]
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row)
    }
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Column,
            _ => Self::Row,
        }
    }
}

/// Main-axis distribution of a flex line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Justify {
    #[default]
    Start = 0,
    Center = 1,
    End = 2,
    SpaceBetween = 3,
    SpaceAround = 4,
    SpaceEvenly = 5,
}

impl From<u8> for Justify {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::End,
            3 => Self::SpaceBetween,
            4 => Self::SpaceAround,
            5 => Self::SpaceEvenly,
            _ => Self::Start,
        }
    }
}

/// Cross-axis alignment of items within a flex line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Align {
    #[default]
    Start = 0,
    Center = 1,
    End = 2,
    Stretch = 3,
}

impl From<u8> for Align {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::End,
            3 => Self::Stretch,
            _ => Self::Start,
        }
    }
}

/// Whether and how flex children wrap onto multiple lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FlexWrap {
    #[default]
    NoWrap = 0,
    Wrap = 1,
    WrapReverse = 2,
}

impl From<u8> for FlexWrap {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Wrap,
            2 => Self::WrapReverse,
            _ => Self::NoWrap,
        }
    }
}

/// Position mode.
///
/// `Absolute` and `Fixed` both leave the flow and resolve against the
/// parent's content box; the distinction matters to scrolling consumers,
/// not to a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Position {
    #[default]
    Relative = 0,
    Absolute = 1,
    Fixed = 2,
}

impl Position {
    /// Check if this mode removes the box from sibling flow.
    #[inline]
    pub const fn is_out_of_flow(&self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

impl From<u8> for Position {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Absolute,
            2 => Self::Fixed,
            _ => Self::Relative,
        }
    }
}

/// Display mode. `None` excludes the box from layout entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Display {
    #[default]
    Flex = 0,
    None = 1,
}

impl From<u8> for Display {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::None,
            _ => Self::Flex,
        }
    }
}

// =============================================================================
// Style
// =============================================================================

/// Layout-relevant properties of one box.
///
/// All sizes use 0 for auto/unconstrained. Defaults produce a relative,
/// visible, non-growing row container with no spacing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub display: Display,
    pub position: Position,

    // Container properties
    pub direction: Direction,
    pub justify: Justify,
    pub align: Align,
    pub flex_wrap: FlexWrap,
    pub gap: f32,

    // Sizing (0 = auto)
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub flex_grow: f32,

    // Spacing
    pub margin: Edges,
    pub padding: Edges,
    pub border_width: f32,

    // Out-of-flow offsets (zero is indistinguishable from unset)
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,

    // Sibling paint/hit order
    pub z_index: i32,
}

impl Style {
    /// Explicit main-axis size, 0 when auto.
    #[inline]
    pub fn main_size(&self, direction: Direction) -> f32 {
        if direction.is_row() { self.width } else { self.height }
    }

    /// Explicit cross-axis size, 0 when auto.
    #[inline]
    pub fn cross_size(&self, direction: Direction) -> f32 {
        if direction.is_row() { self.height } else { self.width }
    }

    /// Main-axis (min, max) constraints, 0 when unconstrained.
    #[inline]
    pub fn main_limits(&self, direction: Direction) -> (f32, f32) {
        if direction.is_row() {
            (self.min_width, self.max_width)
        } else {
            (self.min_height, self.max_height)
        }
    }

    /// Cross-axis (min, max) constraints, 0 when unconstrained.
    #[inline]
    pub fn cross_limits(&self, direction: Direction) -> (f32, f32) {
        if direction.is_row() {
            (self.min_height, self.max_height)
        } else {
            (self.min_width, self.max_width)
        }
    }

    /// Main-axis (leading, trailing) margins.
    #[inline]
    pub fn main_margins(&self, direction: Direction) -> (f32, f32) {
        if direction.is_row() {
            (self.margin.left, self.margin.right)
        } else {
            (self.margin.top, self.margin.bottom)
        }
    }

    /// Cross-axis (leading, trailing) margins.
    #[inline]
    pub fn cross_margins(&self, direction: Direction) -> (f32, f32) {
        if direction.is_row() {
            (self.margin.top, self.margin.bottom)
        } else {
            (self.margin.left, self.margin.right)
        }
    }

    /// Main-axis fallback size for children that neither size nor grow.
    #[inline]
    pub fn main_fallback(direction: Direction) -> f32 {
        if direction.is_row() {
            FALLBACK_WIDTH
        } else {
            FALLBACK_HEIGHT
        }
    }
}

/// Clamp a computed size against zero-means-unconstrained min/max bounds.
///
/// Min wins over max when they conflict, and the result never goes negative.
#[inline]
pub(crate) fn clamp_size(value: f32, min: f32, max: f32) -> f32 {
    let mut result = value;
    if max > 0.0 && result > max {
        result = max;
    }
    if min > 0.0 && result < min {
        result = min;
    }
    result.max(0.0)
}

// =============================================================================
// Tests
// =============================================================================
