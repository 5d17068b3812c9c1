//! Flex line building and solving.
//!
//! The builder groups in-flow siblings into main-axis-bounded lines when
//! wrapping is enabled. The solver lays out one line: main-axis sizing
//! (explicit, grow, fallback), a uniform shrink factor on overflow, justify
//! spacing, and cross-axis alignment.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::geometry::Rect;
use crate::style::{clamp_size, Align, Direction, Justify, Style};
use crate::tree::NodeRef;

/// One flex line: a short run of in-flow siblings.
pub(crate) type Line = SmallVec<[NodeRef; 8]>;

/// A line item with its resolved sizes.
struct FlexItem {
    node: NodeRef,
    style: Rc<Style>,
    main: f32,
    cross: f32,
    grows: bool,
}

/// Main-axis base size: explicit wins, grow children start at zero,
/// everything else gets the per-axis fallback.
fn base_main(style: &Style, direction: Direction) -> (f32, bool) {
    let explicit = style.main_size(direction);
    if explicit > 0.0 {
        (explicit, false)
    } else if style.flex_grow > 0.0 {
        (0.0, true)
    } else {
        (Style::main_fallback(direction), false)
    }
}

/// Main-axis extent an item occupies for wrapping decisions: base size plus
/// both main margins.
fn occupied_main(style: &Style, direction: Direction) -> f32 {
    let (base, _) = base_main(style, direction);
    let (lead, trail) = style.main_margins(direction);
    base + lead + trail
}

// =============================================================================
// Line builder
// =============================================================================

/// Greedily group flow children into main-axis-bounded lines.
///
/// A line closes when the next item (plus one gap) would exceed the available
/// main extent. No item is ever dropped: an oversized item forms its own
/// line. Caller reverses the result for wrap-reverse.
pub(crate) fn build_lines(
    items: &[NodeRef],
    main_avail: f32,
    gap: f32,
    direction: Direction,
) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Line = SmallVec::new();
    let mut used: f32 = 0.0;

    for item in items {
        let size = occupied_main(&item.style(), direction);
        let needed = if current.is_empty() {
            size
        } else {
            used + gap + size
        };

        if !current.is_empty() && needed > main_avail {
            lines.push(current);
            current = SmallVec::new();
            used = size;
        } else {
            used = needed;
        }
        current.push(item.clone());
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// =============================================================================
// Line solver
// =============================================================================

/// Lay out one flex line and write each item's rectangle.
///
/// `main_avail` is the line's main extent, `cross_avail` its cross extent,
/// `cross_start` the line's cross offset inside the parent's content box.
/// Returns the line's measured thickness: the largest item cross extent
/// including cross margins, which the caller uses to stack wrapped lines.
pub(crate) fn solve_line(
    items: &[NodeRef],
    content: Rect,
    main_avail: f32,
    cross_avail: f32,
    cross_start: f32,
    container: &Style,
) -> f32 {
    if items.is_empty() {
        return 0.0;
    }

    let direction = container.direction;
    let gap = container.gap;
    let n = items.len();
    let total_gaps = gap * (n - 1) as f32;

    // Step 1: classify children on the main axis.
    let mut line: SmallVec<[FlexItem; 8]> = SmallVec::with_capacity(n);
    let mut total_fixed = total_gaps;
    let mut total_grow: f32 = 0.0;

    for node in items {
        let style = node.style();
        let (base, grows) = base_main(&style, direction);
        let (lead, trail) = style.main_margins(direction);

        total_fixed += base + lead + trail;
        if grows {
            total_grow += style.flex_grow;
        }
        line.push(FlexItem {
            node: node.clone(),
            style,
            main: base,
            cross: 0.0,
            grows,
        });
    }

    // Step 2: on overflow, scale every fixed-size child by one uniform
    // shrink factor. Negative flex space never reaches distribution.
    let mut flex_space = main_avail - total_fixed;
    if flex_space < 0.0 {
        if total_fixed > 0.0 {
            let shrink = (main_avail / total_fixed).clamp(0.0, 1.0);
            for item in line.iter_mut().filter(|i| !i.grows) {
                item.main *= shrink;
            }
        }
        flex_space = 0.0;
    }

    // Step 3: distribute remaining space proportionally to grow weights.
    if flex_space > 0.0 && total_grow > 0.0 {
        for item in line.iter_mut().filter(|i| i.grows) {
            item.main = item.style.flex_grow / total_grow * flex_space;
        }
    }

    // Step 4: cross size — explicit wins, auto stretches to the line's cross
    // extent minus the item's own cross margins.
    for item in line.iter_mut() {
        let explicit = item.style.cross_size(direction);
        item.cross = if explicit > 0.0 {
            explicit
        } else {
            let (lead, trail) = item.style.cross_margins(direction);
            (cross_avail - lead - trail).max(0.0)
        };
    }

    // Per-child min/max clamps, axes independent.
    for item in line.iter_mut() {
        let (main_min, main_max) = item.style.main_limits(direction);
        let (cross_min, cross_max) = item.style.cross_limits(direction);
        item.main = clamp_size(item.main, main_min, main_max);
        item.cross = clamp_size(item.cross, cross_min, cross_max);
    }

    // Step 5: main-axis offset and spacing from justify. The space-*
    // modes fold the configured gaps back into the distributed remainder.
    let total_used: f32 = total_gaps
        + line
            .iter()
            .map(|i| {
                let (lead, trail) = i.style.main_margins(direction);
                i.main + lead + trail
            })
            .sum::<f32>();
    let leftover = (main_avail - total_used).max(0.0);
    let nf = n as f32;

    let (mut cursor, spacing) = match container.justify {
        Justify::Start => (0.0, gap),
        Justify::Center => (leftover / 2.0, gap),
        Justify::End => (leftover, gap),
        Justify::SpaceBetween => {
            if n > 1 {
                (0.0, (leftover + total_gaps) / (nf - 1.0))
            } else {
                // single item: nothing to space between
                (0.0, gap)
            }
        }
        Justify::SpaceAround => {
            let around = (leftover + total_gaps) / nf;
            (around / 2.0, around)
        }
        Justify::SpaceEvenly => {
            let even = (leftover + total_gaps) / (nf + 1.0);
            (even, even)
        }
    };

    // Step 6: place items, aligning each on the cross axis.
    let mut thickness: f32 = 0.0;

    for item in &line {
        let (main_lead, main_trail) = item.style.main_margins(direction);
        let (cross_lead, cross_trail) = item.style.cross_margins(direction);

        let cross_offset = match container.align {
            Align::Start | Align::Stretch => cross_lead,
            Align::Center => (cross_avail - item.cross) / 2.0,
            Align::End => cross_avail - item.cross - cross_trail,
        };

        let main_pos = cursor + main_lead;
        let rect = if direction.is_row() {
            Rect::new(
                content.x + main_pos,
                content.y + cross_start + cross_offset,
                item.main.max(0.0),
                item.cross.max(0.0),
            )
        } else {
            Rect::new(
                content.x + cross_start + cross_offset,
                content.y + main_pos,
                item.cross.max(0.0),
                item.main.max(0.0),
            )
        };
        item.node.set_rect(rect);

        thickness = thickness.max(cross_lead + item.cross + cross_trail);
        cursor += main_lead + item.main + main_trail + spacing;
    }

    thickness
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
    use crate::tree::BoxNode;

    fn sized(w: f32, h: f32) -> NodeRef {
        BoxNode::new(Style {
            width: w,
            height: h,
            ..Style::default()
        })
    }

    fn grower(grow: f32) -> NodeRef {
        BoxNode::new(Style {
            flex_grow: grow,
            ..Style::default()
        })
    }

    // =========================================================================
    // Builder
    // =========================================================================

    #[test]
    fn test_build_lines_wraps_on_overflow() {
        // 80 fits, 120 does not: [c0, c1] then [c2]
        let kids = vec![sized(40.0, 10.0), sized(40.0, 10.0), sized(40.0, 10.0)];
        let lines = build_lines(&kids, 100.0, 0.0, Direction::Row);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2);
        assert_eq!(lines[1].len(), 1);
        assert!(Rc::ptr_eq(&lines[1][0], &kids[2]));
    }

    #[test]
    fn test_build_lines_gap_counts_toward_overflow() {
        // 40 + 15 + 40 = 95 fits; adding 15 + 40 would make 150
        let kids = vec![sized(40.0, 10.0), sized(40.0, 10.0), sized(40.0, 10.0)];
        let lines = build_lines(&kids, 100.0, 15.0, Direction::Row);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2);
    }

    #[test]
    fn test_build_lines_oversized_item_owns_a_line() {
        let kids = vec![sized(300.0, 10.0), sized(40.0, 10.0)];
        let lines = build_lines(&kids, 100.0, 0.0, Direction::Row);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 1);
        assert_eq!(lines[1].len(), 1);
    }

    #[test]
    fn test_build_lines_margins_occupy_main_space() {
        let margined = BoxNode::new(Style {
            width: 40.0,
            margin: crate::geometry::Edges::new(0.0, 30.0, 0.0, 0.0),
            ..Style::default()
        });
        // 70 + 40 = 110 > 100, so the second child wraps
        let kids = vec![margined, sized(40.0, 10.0)];
        let lines = build_lines(&kids, 100.0, 0.0, Direction::Row);

        assert_eq!(lines.len(), 2);
    }

    // =========================================================================
    // Solver: main axis
    // =========================================================================

    #[test]
    fn test_solve_fixed_sizes_row() {
        let kids = vec![sized(30.0, 10.0), sized(50.0, 10.0)];
        let container = Style::default();
        solve_line(&kids, Rect::new(0.0, 0.0, 200.0, 40.0), 200.0, 40.0, 0.0, &container);

        assert_eq!(kids[0].rect(), Rect::new(0.0, 0.0, 30.0, 10.0));
        assert_eq!(kids[1].rect(), Rect::new(30.0, 0.0, 50.0, 10.0));
    }

    #[test]
    fn test_solve_gap_spacing() {
        let kids = vec![sized(30.0, 10.0), sized(30.0, 10.0)];
        let container = Style {
            gap: 8.0,
            ..Style::default()
        };
        solve_line(&kids, Rect::new(0.0, 0.0, 200.0, 40.0), 200.0, 40.0, 0.0, &container);

        assert_eq!(kids[1].rect().x, 38.0);
    }

    #[test]
    fn test_solve_grow_is_proportional() {
        // Weights 1 and 3 sharing 40 free units yield 10 and 30
        let kids = vec![sized(60.0, 10.0), grower(1.0), grower(3.0)];
        let container = Style::default();
        solve_line(&kids, Rect::new(0.0, 0.0, 100.0, 40.0), 100.0, 40.0, 0.0, &container);

        assert_eq!(kids[1].rect().w, 10.0);
        assert_eq!(kids[2].rect().w, 30.0);
    }

    #[test]
    fn test_solve_uniform_shrink_on_overflow() {
        // 150 of content in 100 of space: every fixed child scales by 2/3
        let kids = vec![sized(100.0, 10.0), sized(50.0, 10.0)];
        let container = Style::default();
        solve_line(&kids, Rect::new(0.0, 0.0, 100.0, 40.0), 100.0, 40.0, 0.0, &container);

        let total = kids[0].rect().w + kids[1].rect().w;
        assert!((total - 100.0).abs() < 1e-3);
        assert!((kids[0].rect().w - 100.0 * (100.0 / 150.0)).abs() < 1e-3);
        assert!((kids[1].rect().w - 50.0 * (100.0 / 150.0)).abs() < 1e-3);
    }

    #[test]
    fn test_solve_fallback_size_for_auto_children() {
        let kids = vec![BoxNode::new(Style::default())];
        let container = Style::default();
        solve_line(&kids, Rect::new(0.0, 0.0, 200.0, 200.0), 200.0, 200.0, 0.0, &container);
        assert_eq!(kids[0].rect().w, FALLBACK_WIDTH);

        let column = Style {
            direction: Direction::Column,
            ..Style::default()
        };
        solve_line(&kids, Rect::new(0.0, 0.0, 200.0, 200.0), 200.0, 200.0, 0.0, &column);
        assert_eq!(kids[0].rect().h, FALLBACK_HEIGHT);
    }

    // =========================================================================
    // Solver: justify
    // =========================================================================

    fn justify_container(justify: Justify) -> Style {
        Style {
            justify,
            ..Style::default()
        }
    }

    #[test]
    fn test_justify_center_and_end() {
        let kids = vec![sized(30.0, 10.0), sized(30.0, 10.0)];
        let content = Rect::new(0.0, 0.0, 100.0, 40.0);

        solve_line(&kids, content, 100.0, 40.0, 0.0, &justify_container(Justify::Center));
        assert_eq!(kids[0].rect().x, 20.0);
        assert_eq!(kids[1].rect().x, 50.0);

        solve_line(&kids, content, 100.0, 40.0, 0.0, &justify_container(Justify::End));
        assert_eq!(kids[0].rect().x, 40.0);
        assert_eq!(kids[1].rect().x, 70.0);
    }

    #[test]
    fn test_justify_space_between() {
        let kids = vec![sized(20.0, 10.0), sized(20.0, 10.0), sized(20.0, 10.0)];
        let content = Rect::new(0.0, 0.0, 100.0, 40.0);
        solve_line(&kids, content, 100.0, 40.0, 0.0, &justify_container(Justify::SpaceBetween));

        assert_eq!(kids[0].rect().x, 0.0);
        assert_eq!(kids[1].rect().x, 40.0);
        assert_eq!(kids[2].rect().x, 80.0);
    }

    #[test]
    fn test_justify_space_between_single_item_guard() {
        let kids = vec![sized(20.0, 10.0)];
        let content = Rect::new(0.0, 0.0, 100.0, 40.0);
        solve_line(&kids, content, 100.0, 40.0, 0.0, &justify_container(Justify::SpaceBetween));

        // n == 1: no spacing division, item stays at the line start
        assert_eq!(kids[0].rect().x, 0.0);
    }

    #[test]
    fn test_justify_space_around() {
        let kids = vec![sized(20.0, 10.0), sized(20.0, 10.0)];
        let content = Rect::new(0.0, 0.0, 100.0, 40.0);
        solve_line(&kids, content, 100.0, 40.0, 0.0, &justify_container(Justify::SpaceAround));

        // spacing = 60 / 2 = 30, offset = 15
        assert_eq!(kids[0].rect().x, 15.0);
        assert_eq!(kids[1].rect().x, 65.0);
    }

    #[test]
    fn test_justify_space_evenly() {
        let kids = vec![sized(20.0, 10.0), sized(20.0, 10.0)];
        let content = Rect::new(0.0, 0.0, 100.0, 40.0);
        solve_line(&kids, content, 100.0, 40.0, 0.0, &justify_container(Justify::SpaceEvenly));

        // spacing = 60 / 3 = 20
        assert_eq!(kids[0].rect().x, 20.0);
        assert_eq!(kids[1].rect().x, 60.0);
    }

    // =========================================================================
    // Solver: cross axis
    // =========================================================================

    #[test]
    fn test_cross_auto_stretches_minus_margins() {
        let kid = BoxNode::new(Style {
            width: 30.0,
            margin: crate::geometry::Edges::new(5.0, 0.0, 5.0, 0.0),
            ..Style::default()
        });
        let kids = vec![kid];
        solve_line(&kids, Rect::new(0.0, 0.0, 100.0, 60.0), 100.0, 60.0, 0.0, &Style::default());

        assert_eq!(kids[0].rect().h, 50.0);
        assert_eq!(kids[0].rect().y, 5.0);
    }

    #[test]
    fn test_cross_align_center_and_end() {
        let kids = vec![sized(30.0, 20.0)];
        let content = Rect::new(0.0, 0.0, 100.0, 60.0);

        let center = Style {
            align: Align::Center,
            ..Style::default()
        };
        solve_line(&kids, content, 100.0, 60.0, 0.0, &center);
        assert_eq!(kids[0].rect().y, 20.0);

        let end = Style {
            align: Align::End,
            ..Style::default()
        };
        solve_line(&kids, content, 100.0, 60.0, 0.0, &end);
        assert_eq!(kids[0].rect().y, 40.0);
    }

    #[test]
    fn test_cross_align_end_respects_trailing_margin() {
        let kid = BoxNode::new(Style {
            width: 30.0,
            height: 20.0,
            margin: crate::geometry::Edges::new(0.0, 0.0, 6.0, 0.0),
            ..Style::default()
        });
        let kids = vec![kid];
        let end = Style {
            align: Align::End,
            ..Style::default()
        };
        solve_line(&kids, Rect::new(0.0, 0.0, 100.0, 60.0), 100.0, 60.0, 0.0, &end);

        assert_eq!(kids[0].rect().y, 34.0);
    }

    // =========================================================================
    // Solver: clamps
    // =========================================================================

    #[test]
    fn test_min_max_clamps_after_distribution() {
        let capped = BoxNode::new(Style {
            flex_grow: 1.0,
            max_width: 25.0,
            ..Style::default()
        });
        let floored = BoxNode::new(Style {
            width: 10.0,
            min_width: 30.0,
            ..Style::default()
        });
        let kids = vec![capped, floored];
        solve_line(&kids, Rect::new(0.0, 0.0, 200.0, 40.0), 200.0, 40.0, 0.0, &Style::default());

        assert_eq!(kids[0].rect().w, 25.0);
        assert_eq!(kids[1].rect().w, 30.0);
    }
}
