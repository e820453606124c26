//! Layout and hit-testing helpers shared by the UI components.

use ratatui::prelude::*;

/// Creates a centered rectangle of at most `width` x `height` cells.
///
/// The result is clamped to the parent so small terminals still get a
/// usable (if cramped) area.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Returns true when the terminal cell (`x`, `y`) falls inside `area`.
pub fn contains(area: Rect, x: u16, y: u16) -> bool {
    area.contains(Position { x, y })
}

/// Finds the index of the rect under the pointer, if the pointer is inside
/// `container` at all.
pub fn find_target_index_by_mouse_position(container: &Rect, targets: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !contains(*container, x, y) {
        return None;
    }
    targets.iter().position(|rect| contains(*rect, x, y))
}

/// Places a popover of `width` x `height` below `anchor`, right-aligned to
/// it and kept inside `bounds`.
pub fn popover_below(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let right = anchor.right().min(bounds.right());
    let x = right.saturating_sub(width).max(bounds.x);
    let y = anchor.bottom().min(bounds.bottom());
    let height = height.min(bounds.bottom().saturating_sub(y));
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped() {
        let parent = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, parent), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(200, 50, parent), parent);
    }

    #[test]
    fn mouse_targeting_requires_container_hit() {
        let container = Rect::new(0, 0, 10, 10);
        let rows = [Rect::new(0, 1, 10, 1), Rect::new(0, 2, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 3, 2), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 3, 5), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 20, 2), None);
    }

    #[test]
    fn popover_stays_inside_bounds() {
        let bounds = Rect::new(0, 0, 100, 30);
        let bell = Rect::new(90, 0, 5, 3);
        let popover = popover_below(bell, 40, 10, bounds);
        assert_eq!(popover, Rect::new(55, 3, 40, 10));
        let tall = popover_below(bell, 40, 50, bounds);
        assert_eq!(tall.bottom(), 30);
    }
}
