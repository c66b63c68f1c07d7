// SPDX-License-Identifier: MPL-2.0
//! Drag anchor for panning a magnified image.

use iced::{Point, Vector};

/// Offset between the grab point and the image position at drag start.
///
/// Keeping the anchor instead of the last pointer position means every move
/// recomputes the position from scratch, so no rounding error accumulates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor(Vector);

impl DragAnchor {
    /// Captures `point - position`.
    #[must_use]
    pub fn new(point: Point, position: Vector) -> Self {
        Self(Vector::new(point.x - position.x, point.y - position.y))
    }

    /// Returns the image position that keeps the anchor under `point`.
    #[must_use]
    pub fn position_for(self, point: Point) -> Vector {
        Vector::new(point.x - self.0.x, point.y - self.0.y)
    }

    #[must_use]
    pub fn offset(self) -> Vector {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_point_minus_position() {
        let anchor = DragAnchor::new(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));
        assert_eq!(anchor.offset(), Vector::new(80.0, 40.0));
    }

    #[test]
    fn position_follows_pointer() {
        let anchor = DragAnchor::new(Point::new(200.0, 150.0), Vector::new(50.0, 30.0));

        // Pointer moved left/up by 20 pixels
        let position = anchor.position_for(Point::new(180.0, 130.0));

        assert_eq!(position, Vector::new(30.0, 10.0));
    }

    #[test]
    fn returning_to_start_restores_position() {
        let start = Point::new(10.0, 10.0);
        let anchor = DragAnchor::new(start, Vector::new(-4.0, 7.0));
        let _ = anchor.position_for(Point::new(400.0, -300.0));
        assert_eq!(anchor.position_for(start), Vector::new(-4.0, 7.0));
    }
}
