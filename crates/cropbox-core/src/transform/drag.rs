//! Handle drag geometry.

use crate::{HandleKind, Rect};

/// Compute the crop rectangle after dragging `handle` by `(move_x, move_y)`.
///
/// Edges attached to the handle follow the pointer while the opposite edges
/// stay put, so dragging a left or top edge shifts the origin and shrinks
/// the extent by the same amount. `Move` translates the whole rectangle and
/// `Normal` returns it unchanged.
///
/// No bounds or minimum size are applied here; run [`super::clamp_rect`]
/// on the result.
///
/// # Example
///
/// ```ignore
/// let rect = Rect::new(10.0, 10.0, 200.0, 100.0);
/// let result = transform_rect(rect, 5.0, -5.0, HandleKind::TopLeft);
/// assert_eq!(result, Rect::new(15.0, 5.0, 195.0, 105.0));
/// ```
pub fn transform_rect(rect: Rect, move_x: f64, move_y: f64, handle: HandleKind) -> Rect {
    let Rect {
        mut x,
        mut y,
        mut width,
        mut height,
    } = rect;

    match handle {
        HandleKind::Move => {
            x += move_x;
            y += move_y;
        }
        HandleKind::TopLeft => {
            x += move_x;
            y += move_y;
            width -= move_x;
            height -= move_y;
        }
        HandleKind::TopCenter => {
            y += move_y;
            height -= move_y;
        }
        HandleKind::TopRight => {
            y += move_y;
            width += move_x;
            height -= move_y;
        }
        HandleKind::CenterLeft => {
            x += move_x;
            width -= move_x;
        }
        HandleKind::CenterRight => {
            width += move_x;
        }
        HandleKind::BottomLeft => {
            x += move_x;
            width -= move_x;
            height += move_y;
        }
        HandleKind::BottomCenter => {
            height += move_y;
        }
        HandleKind::BottomRight => {
            width += move_x;
            height += move_y;
        }
        HandleKind::Normal => {}
    }

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Rect {
        Rect::new(10.0, 10.0, 200.0, 100.0)
    }

    #[test]
    fn test_top_left_scenario() {
        let result = transform_rect(base(), 5.0, -5.0, HandleKind::TopLeft);
        assert_eq!(result, Rect::new(15.0, 5.0, 195.0, 105.0));
    }

    #[test]
    fn test_move_translates_only() {
        let result = transform_rect(base(), 30.0, -7.5, HandleKind::Move);
        assert_eq!(result, Rect::new(40.0, 2.5, 200.0, 100.0));
    }

    #[test]
    fn test_normal_is_identity() {
        let result = transform_rect(base(), 30.0, 40.0, HandleKind::Normal);
        assert_eq!(result, base());
    }

    #[test]
    fn test_edge_handles() {
        assert_eq!(
            transform_rect(base(), 3.0, 4.0, HandleKind::TopCenter),
            Rect::new(10.0, 14.0, 200.0, 96.0)
        );
        assert_eq!(
            transform_rect(base(), 3.0, 4.0, HandleKind::CenterLeft),
            Rect::new(13.0, 10.0, 197.0, 100.0)
        );
        assert_eq!(
            transform_rect(base(), 3.0, 4.0, HandleKind::CenterRight),
            Rect::new(10.0, 10.0, 203.0, 100.0)
        );
        assert_eq!(
            transform_rect(base(), 3.0, 4.0, HandleKind::BottomCenter),
            Rect::new(10.0, 10.0, 200.0, 104.0)
        );
    }

    #[test]
    fn test_corner_handles() {
        assert_eq!(
            transform_rect(base(), 3.0, 4.0, HandleKind::TopRight),
            Rect::new(10.0, 14.0, 203.0, 96.0)
        );
        assert_eq!(
            transform_rect(base(), 3.0, 4.0, HandleKind::BottomLeft),
            Rect::new(13.0, 10.0, 197.0, 104.0)
        );
        assert_eq!(
            transform_rect(base(), 3.0, 4.0, HandleKind::BottomRight),
            Rect::new(10.0, 10.0, 203.0, 104.0)
        );
    }

    #[test]
    fn test_size_can_go_negative() {
        // Dragging the left edge past the right edge is allowed here
        let result = transform_rect(base(), 250.0, 0.0, HandleKind::CenterLeft);
        assert_eq!(result.x, 260.0);
        assert_eq!(result.width, -50.0);
    }

    #[test]
    fn test_anchored_edges_stay_put() {
        let rect = base();

        let tl = transform_rect(rect, -12.0, 8.0, HandleKind::TopLeft);
        assert_eq!(tl.right(), rect.right());
        assert_eq!(tl.bottom(), rect.bottom());

        let br = transform_rect(rect, -12.0, 8.0, HandleKind::BottomRight);
        assert_eq!(br.x, rect.x);
        assert_eq!(br.y, rect.y);

        let tr = transform_rect(rect, -12.0, 8.0, HandleKind::TopRight);
        assert_eq!(tr.x, rect.x);
        assert_eq!(tr.bottom(), rect.bottom());

        let bl = transform_rect(rect, -12.0, 8.0, HandleKind::BottomLeft);
        assert_eq!(bl.right(), rect.right());
        assert_eq!(bl.y, rect.y);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
