//! Free-space expansion ("grow") of shapes toward their neighbors.

use super::Shape;
use crate::error::{Error, Result};

/// How far a shape may expand in each direction before hitting a neighbor's
/// margin or the canvas edge. Values can be negative when margins already
/// overlap; callers must pass them through unclamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowDeltas {
    /// Available distance leftward
    pub left: i64,
    /// Available distance rightward
    pub right: i64,
    /// Available distance upward
    pub above: i64,
    /// Available distance downward
    pub below: i64,
}

/// The four cardinal directions of expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Above,
    Below,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Above,
    Direction::Below,
];

/// Compute the expansion budget of the shape at `idx` relative to its
/// siblings.
///
/// The canvas is the bounding box of all shapes. For each direction, a
/// sibling qualifies as a neighbor when it lies strictly on that side of the
/// subject and its span on the perpendicular axis overlaps the subject's
/// (half-open test, so edge-touching shapes do not constrain each other).
/// The bound toward a neighbor is the edge gap minus the larger of the two
/// margins, minimized over neighbors; without neighbors it is the distance to
/// the canvas edge.
///
/// Reads only an immutable snapshot of the shapes; call it for every sibling
/// before applying any grow so later computations never observe moved shapes.
pub fn expand(shapes: &[Shape], idx: usize) -> Result<GrowDeltas> {
    if shapes.is_empty() {
        return Err(Error::EmptyShapes);
    }
    if idx >= shapes.len() {
        return Err(Error::ShapeIndex {
            index: idx,
            len: shapes.len(),
        });
    }

    let canvas = bounding_box(shapes);
    let subject = &shapes[idx];

    let mut deltas = GrowDeltas::default();
    for direction in DIRECTIONS {
        let bound = shapes
            .iter()
            .enumerate()
            .filter(|&(i, other)| i != idx && qualifies(subject, other, direction))
            .map(|(_, other)| gap(subject, other, direction) - subject.margin.max(other.margin))
            .min();

        let value = match bound {
            Some(nearest) => nearest,
            None => canvas_distance(subject, &canvas, direction),
        };
        match direction {
            Direction::Left => deltas.left = value,
            Direction::Right => deltas.right = value,
            Direction::Above => deltas.above = value,
            Direction::Below => deltas.below = value,
        }
    }

    Ok(deltas)
}

/// Apply a grow code to a shape given its expansion budget, returning the
/// resulting rectangle.
///
/// Numpad semantics: corners grow their two adjacent edges, edge midpoints
/// grow one edge, 5 grows all four. All four output fields are derived from
/// the input shape before the new value is constructed, so width and height
/// never observe a half-updated origin.
pub fn apply_grow(shape: &Shape, grow: u8, deltas: &GrowDeltas) -> Shape {
    if !(1..=9).contains(&grow) {
        log::warn!("Ignoring grow code {} outside 1..=9", grow);
        return shape.clone();
    }

    let all = grow == 5;
    let d_left = if all || matches!(grow, 1 | 4 | 7) {
        deltas.left
    } else {
        0
    };
    let d_right = if all || matches!(grow, 3 | 6 | 9) {
        deltas.right
    } else {
        0
    };
    let d_above = if all || matches!(grow, 7 | 8 | 9) {
        deltas.above
    } else {
        0
    };
    let d_below = if all || matches!(grow, 1 | 2 | 3) {
        deltas.below
    } else {
        0
    };

    let left = shape.left - d_left;
    let top = shape.top - d_above;
    let width = shape.width + d_left + d_right;
    let height = shape.height + d_above + d_below;

    Shape {
        left,
        top,
        width,
        height,
        ..shape.clone()
    }
}

/// Grow every annotated shape on a slide against the pre-grow snapshot.
///
/// All deltas are computed before any output shape is constructed, honoring
/// the ordering contract that sibling distances are always measured between
/// original positions. Shapes without a grow annotation pass through
/// unchanged.
pub fn grow_all(shapes: &[Shape]) -> Result<Vec<Shape>> {
    let mut deltas = Vec::with_capacity(shapes.len());
    for (idx, shape) in shapes.iter().enumerate() {
        deltas.push(match shape.grow {
            Some(_) => Some(expand(shapes, idx)?),
            None => None,
        });
    }

    Ok(shapes
        .iter()
        .zip(deltas)
        .map(|(shape, delta)| match (shape.grow, delta) {
            (Some(grow), Some(d)) => apply_grow(shape, grow, &d),
            _ => shape.clone(),
        })
        .collect())
}

fn bounding_box(shapes: &[Shape]) -> Shape {
    let left = shapes.iter().map(|s| s.left).min().unwrap_or(0);
    let top = shapes.iter().map(|s| s.top).min().unwrap_or(0);
    let right = shapes.iter().map(Shape::right).max().unwrap_or(0);
    let bottom = shapes.iter().map(Shape::bottom).max().unwrap_or(0);
    Shape::new(left, top, right - left, bottom - top)
}

/// Half-open interval overlap on one axis.
fn spans_overlap(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

fn qualifies(subject: &Shape, other: &Shape, direction: Direction) -> bool {
    match direction {
        Direction::Left => {
            other.right() <= subject.left
                && spans_overlap(subject.top, subject.bottom(), other.top, other.bottom())
        }
        Direction::Right => {
            other.left >= subject.right()
                && spans_overlap(subject.top, subject.bottom(), other.top, other.bottom())
        }
        Direction::Above => {
            other.bottom() <= subject.top
                && spans_overlap(subject.left, subject.right(), other.left, other.right())
        }
        Direction::Below => {
            other.top >= subject.bottom()
                && spans_overlap(subject.left, subject.right(), other.left, other.right())
        }
    }
}

fn gap(subject: &Shape, other: &Shape, direction: Direction) -> i64 {
    match direction {
        Direction::Left => subject.left - other.right(),
        Direction::Right => other.left - subject.right(),
        Direction::Above => subject.top - other.bottom(),
        Direction::Below => other.top - subject.bottom(),
    }
}

fn canvas_distance(subject: &Shape, canvas: &Shape, direction: Direction) -> i64 {
    match direction {
        Direction::Left => subject.left - canvas.left,
        Direction::Right => canvas.right() - subject.right(),
        Direction::Above => subject.top - canvas.top,
        Direction::Below => canvas.bottom() - subject.bottom(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosed_subject_reaches_canvas_edges() {
        // Outer frame spans (0,0)-(100,100); subject sits inside but no
        // sibling qualifies directionally (frame corners only).
        let shapes = vec![
            Shape::new(0, 0, 10, 10),
            Shape::new(90, 90, 10, 10),
            Shape::new(40, 40, 20, 20),
        ];
        let deltas = expand(&shapes, 2).unwrap();
        // Corner shapes share no perpendicular span with the subject.
        assert_eq!(
            deltas,
            GrowDeltas {
                left: 40,
                right: 40,
                above: 40,
                below: 40,
            }
        );
    }

    #[test]
    fn test_neighbor_bounds_direction() {
        let shapes = vec![
            Shape::new(0, 0, 30, 100),   // left neighbor
            Shape::new(50, 0, 30, 100),  // subject
            Shape::new(100, 0, 30, 100), // right neighbor
        ];
        let deltas = expand(&shapes, 1).unwrap();
        assert_eq!(deltas.left, 20);
        assert_eq!(deltas.right, 20);
        // No vertical neighbors: canvas bounds.
        assert_eq!(deltas.above, 0);
        assert_eq!(deltas.below, 0);
    }

    #[test]
    fn test_neighbor_bound_not_exceeding_raw_gap() {
        let mut left = Shape::new(0, 0, 30, 100);
        left.margin = 5;
        let subject = Shape::new(50, 0, 30, 100);
        let shapes = vec![left, subject];
        let deltas = expand(&shapes, 1).unwrap();
        // Raw gap 20, reduced by the larger margin.
        assert_eq!(deltas.left, 15);
    }

    #[test]
    fn test_negative_budget_passes_through() {
        let mut left = Shape::new(0, 0, 30, 100);
        left.margin = 50;
        let subject = Shape::new(40, 0, 30, 100);
        let shapes = vec![left, subject];
        let deltas = expand(&shapes, 1).unwrap();
        assert_eq!(deltas.left, -40);
    }

    #[test]
    fn test_corner_touching_sibling_does_not_qualify() {
        // Sibling touches the subject only at a corner: the half-open span
        // test rejects it in every direction, so the canvas bounds apply.
        let shapes = vec![Shape::new(0, 0, 50, 50), Shape::new(50, 50, 50, 50)];
        let deltas = expand(&shapes, 1).unwrap();
        assert_eq!(deltas.left, 50);
        assert_eq!(deltas.above, 50);
    }

    #[test]
    fn test_flush_sibling_gives_zero_budget() {
        // Sibling directly above with no gap: qualifies, budget is zero.
        let shapes = vec![Shape::new(0, 0, 100, 50), Shape::new(0, 50, 100, 50)];
        let deltas = expand(&shapes, 1).unwrap();
        assert_eq!(deltas.above, 0);
    }

    #[test]
    fn test_closest_neighbor_wins() {
        let shapes = vec![
            Shape::new(0, 0, 10, 100),
            Shape::new(30, 0, 10, 100),
            Shape::new(70, 0, 10, 100), // subject
        ];
        let deltas = expand(&shapes, 2).unwrap();
        assert_eq!(deltas.left, 30);
    }

    #[test]
    fn test_expand_index_errors() {
        assert!(matches!(expand(&[], 0), Err(Error::EmptyShapes)));
        let shapes = vec![Shape::new(0, 0, 10, 10)];
        assert!(matches!(
            expand(&shapes, 3),
            Err(Error::ShapeIndex { index: 3, len: 1 })
        ));
    }

    #[test]
    fn test_apply_grow_edge_sets() {
        let shape = Shape::new(100, 100, 50, 50);
        let deltas = GrowDeltas {
            left: 10,
            right: 20,
            above: 30,
            below: 40,
        };

        // 4 = left midpoint: only the left edge moves.
        let grown = apply_grow(&shape, 4, &deltas);
        assert_eq!((grown.left, grown.width), (90, 60));
        assert_eq!((grown.top, grown.height), (100, 50));

        // 9 = top-right corner.
        let grown = apply_grow(&shape, 9, &deltas);
        assert_eq!((grown.left, grown.width), (100, 70));
        assert_eq!((grown.top, grown.height), (70, 80));

        // 2 = bottom midpoint.
        let grown = apply_grow(&shape, 2, &deltas);
        assert_eq!((grown.top, grown.height), (100, 90));

        // 5 grows all four edges.
        let grown = apply_grow(&shape, 5, &deltas);
        assert_eq!(grown, Shape::new(90, 70, 80, 120));
    }

    #[test]
    fn test_apply_grow_invalid_code_is_noop() {
        let shape = Shape::new(0, 0, 10, 10);
        let deltas = GrowDeltas {
            left: 5,
            right: 5,
            above: 5,
            below: 5,
        };
        assert_eq!(apply_grow(&shape, 0, &deltas), shape);
    }

    #[test]
    fn test_grow_all_uses_pregrow_snapshot() {
        // Two shapes growing toward each other across a 40-unit gap: each
        // must see the full gap measured between original positions.
        let mut a = Shape::new(0, 0, 30, 100);
        a.grow = Some(6); // grow right
        let mut b = Shape::new(70, 0, 30, 100);
        b.grow = Some(4); // grow left
        let grown = grow_all(&[a, b]).unwrap();

        assert_eq!(grown[0].width, 70);
        assert_eq!(grown[1].left, 30);
        assert_eq!(grown[1].width, 70);
    }

    #[test]
    fn test_grow_all_skips_unannotated() {
        let a = Shape::new(0, 0, 30, 100);
        let mut b = Shape::new(70, 0, 30, 100);
        b.grow = Some(4);
        let grown = grow_all(&[a.clone(), b]).unwrap();
        assert_eq!(grown[0], a);
        assert_eq!(grown[1].left, 30);
    }
}
