use super::surface::{Point, Size};

/// Gap between the pointer and the surface's nearest corner.
pub const POINTER_OFFSET: f64 = 15.0;
/// Minimum distance kept from every viewport edge.
pub const EDGE_MARGIN: f64 = 10.0;

/// Computes where a surface of `size` opens for a pointer at `pointer`.
///
/// The surface goes below and to the right of the pointer. On an axis where
/// that would overflow the far edge it flips to the other side of the
/// pointer, and the result is never closer than `EDGE_MARGIN` to the top or
/// left edge.
pub fn place(pointer: Point, size: Size, viewport: Size) -> Point {
    Point {
        x: place_axis(pointer.x, size.width, viewport.width),
        y: place_axis(pointer.y, size.height, viewport.height),
    }
}

fn place_axis(pointer: f64, extent: f64, limit: f64) -> f64 {
    let mut pos = pointer + POINTER_OFFSET;
    if pos + extent > limit - EDGE_MARGIN {
        pos = pointer - extent - POINTER_OFFSET;
    }
    pos.max(EDGE_MARGIN)
}
