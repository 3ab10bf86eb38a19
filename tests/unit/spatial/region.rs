//! Tests for pixel region construction and set algebra

#[cfg(test)]
mod tests {
    use pixmaze::spatial::region::{Bounds, PixelRegion, Point, UNCOLORED};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn test_rectangle_is_half_open() {
        let rect = PixelRegion::rectangle(Point::new(1, 2), Point::new(4, 4));
        assert_eq!(rect.len(), 6);
        assert!(rect.contains(Point::new(1, 2)));
        assert!(rect.contains(Point::new(3, 3)));
        assert!(!rect.contains(Point::new(4, 3)));
        assert!(!rect.contains(Point::new(3, 4)));
        assert!(rect.iter().all(|(_, c)| c == UNCOLORED));
    }

    #[test]
    fn test_degenerate_rectangles_are_empty() {
        assert!(PixelRegion::rectangle(Point::new(3, 3), Point::new(3, 8)).is_empty());
        assert!(PixelRegion::rectangle(Point::new(5, 5), Point::new(2, 2)).is_empty());
    }

    // Tests last-writer-wins on shared coordinates
    #[test]
    fn test_union_prefers_right_hand_colors() {
        let left = PixelRegion::rectangle(Point::new(0, 0), Point::new(2, 1)).with_color(RED);
        let right = PixelRegion::rectangle(Point::new(1, 0), Point::new(3, 1)).with_color(BLUE);

        let merged = left.clone().union(&right);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.color_at(Point::new(0, 0)), Some(RED));
        assert_eq!(merged.color_at(Point::new(1, 0)), Some(BLUE));

        let reversed = right.union(&left);
        assert_eq!(reversed.color_at(Point::new(1, 0)), Some(RED));
    }

    #[test]
    fn test_difference_ignores_color_and_missing_points() {
        let region = PixelRegion::rectangle(Point::new(0, 0), Point::new(3, 3)).with_color(RED);
        let trimmed = region.difference([Point::new(1, 1), Point::new(9, 9)]);
        assert_eq!(trimmed.len(), 8);
        assert!(!trimmed.contains(Point::new(1, 1)));
    }

    #[test]
    fn test_shift_translates_and_keeps_colors() {
        let mut region = PixelRegion::new();
        region.insert(Point::new(0, 0), RED);
        region.insert(Point::new(2, 1), BLUE);

        let moved = region.shift(Point::new(5, -1));
        assert_eq!(moved.color_at(Point::new(5, -1)), Some(RED));
        assert_eq!(moved.color_at(Point::new(7, 0)), Some(BLUE));
        assert_eq!(moved.len(), 2);
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(PixelRegion::new().bounding_box(), None);
        let region = PixelRegion::from_points([Point::new(3, -2), Point::new(-1, 4), Point::new(0, 0)]);
        assert_eq!(
            region.bounding_box(),
            Some(Bounds {
                min: Point::new(-1, -2),
                max: Point::new(3, 4),
            })
        );
    }

    #[test]
    fn test_boolean_matrix_and_clipping_drop_off_canvas_pixels() {
        let region = PixelRegion::from_points([
            Point::new(0, 0),
            Point::new(2, 1),
            Point::new(-1, 0),
            Point::new(3, 0),
            Point::new(0, 2),
        ]);

        let matrix = region.to_boolean_matrix(3, 2);
        assert_eq!(matrix.dim(), (2, 3));
        assert_eq!(matrix.iter().filter(|&&b| b).count(), 2);
        assert_eq!(matrix.get([1, 2]), Some(&true));

        let clipped = region.clipped(3, 2);
        assert_eq!(clipped.len(), 2);
    }

    #[test]
    fn test_canvas_index_is_row_major() {
        assert_eq!(Point::new(2, 1).canvas_index(3, 2), Some([1, 2]));
        assert_eq!(Point::new(3, 1).canvas_index(3, 2), None);
        assert_eq!(Point::new(0, -1).canvas_index(3, 2), None);
        assert_eq!(Point::new(1, 1).offset(-1, 2), Point::new(0, 3));
    }

    #[test]
    fn test_iteration_is_ordered_and_collectable() {
        let region: PixelRegion = [(Point::new(1, 0), RED), (Point::new(0, 0), BLUE)]
            .into_iter()
            .collect();
        let points: Vec<Point> = region.points().collect();
        assert_eq!(points, vec![Point::new(0, 0), Point::new(1, 0)]);

        let mut extended = region;
        extended.extend([(Point::new(0, 0), RED)]);
        assert_eq!(extended.color_at(Point::new(0, 0)), Some(RED));
        assert_eq!(extended.len(), 2);
    }
}
