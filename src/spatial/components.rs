//! Flood-fill grouping and boundary extraction over a bounded canvas

use ndarray::Array2;

use crate::spatial::region::{PixelRegion, Point};

const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl PixelRegion {
    /// Split the region into maximal 4-connected groups
    ///
    /// Only pixels inside `[0, width) x [0, height)` take part. Components are
    /// returned in row-major order of their first pixel and keep their colors.
    pub fn connected_components(&self, width: usize, height: usize) -> Vec<Self> {
        let mut remaining = self.to_boolean_matrix(width, height);
        let mut components = Vec::new();
        let mut stack = Vec::new();

        for y in 0..height {
            for x in 0..width {
                if !take(&mut remaining, [y, x]) {
                    continue;
                }

                let mut component = Self::new();
                stack.push(Point::new(x as i32, y as i32));

                while let Some(point) = stack.pop() {
                    component.insert(point, self.color_at(point).unwrap_or_default());

                    for (dx, dy) in NEIGHBOR_OFFSETS {
                        let next = point.offset(dx, dy);
                        if let Some(index) = next.canvas_index(width, height) {
                            if take(&mut remaining, index) {
                                stack.push(next);
                            }
                        }
                    }
                }

                components.push(component);
            }
        }

        components
    }

    /// Pixels on the outer edge of the filled set
    ///
    /// A pixel is on the boundary when any of its 4 neighbors is empty or lies
    /// outside the canvas.
    pub fn boundary(&self, width: usize, height: usize) -> Self {
        let occupied = self.to_boolean_matrix(width, height);
        self.iter()
            .filter(|(point, _)| point.canvas_index(width, height).is_some())
            .filter(|(point, _)| {
                NEIGHBOR_OFFSETS.iter().any(|&(dx, dy)| {
                    point
                        .offset(dx, dy)
                        .canvas_index(width, height)
                        .and_then(|index| occupied.get(index))
                        .is_none_or(|&filled| !filled)
                })
            })
            .collect()
    }
}

// Clears a set cell and reports whether it was set
fn take(matrix: &mut Array2<bool>, index: [usize; 2]) -> bool {
    matrix
        .get_mut(index)
        .is_some_and(|cell| std::mem::replace(cell, false))
}
