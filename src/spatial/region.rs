//! Coordinate-keyed pixel regions with set algebra
//!
//! A region maps each pixel coordinate to exactly one color. Union is
//! last-writer-wins on color, difference only looks at coordinates. Regions are
//! ordered by coordinate so that every pass over them is deterministic.

use ndarray::Array2;
use std::collections::BTreeMap;

/// RGBA color
pub type Color = [u8; 4];

/// Color carried by freshly rasterized shapes before a palette color is attached
pub const UNCOLORED: Color = [0, 0, 0, 0];

/// Integer pixel coordinate, `x` to the right and `y` downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Horizontal coordinate (column)
    pub x: i32,
    /// Vertical coordinate (row)
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise translation
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Matrix index `[row, col]` if the point lies inside a `width x height` canvas
    pub fn canvas_index(self, width: usize, height: usize) -> Option<[usize; 2]> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        (x < width && y < height).then_some([y, x])
    }
}

/// Inclusive bounds of a non-empty region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest coordinates present
    pub min: Point,
    /// Largest coordinates present
    pub max: Point,
}

/// A set of pixels keyed by coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelRegion {
    pixels: BTreeMap<Point, Color>,
}

impl PixelRegion {
    /// Create an empty region
    pub const fn new() -> Self {
        Self {
            pixels: BTreeMap::new(),
        }
    }

    /// All integer coordinates in `[p0, p1)`, uncolored
    ///
    /// An inverted or degenerate span yields an empty region.
    pub fn rectangle(p0: Point, p1: Point) -> Self {
        let mut pixels = BTreeMap::new();
        for y in p0.y..p1.y {
            for x in p0.x..p1.x {
                pixels.insert(Point::new(x, y), UNCOLORED);
            }
        }
        Self { pixels }
    }

    /// Build an uncolored region from coordinates
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            pixels: points.into_iter().map(|p| (p, UNCOLORED)).collect(),
        }
    }

    /// Attach a single color to every pixel
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        for value in self.pixels.values_mut() {
            *value = color;
        }
        self
    }

    /// Insert or recolor one pixel
    pub fn insert(&mut self, point: Point, color: Color) {
        self.pixels.insert(point, color);
    }

    /// Coordinate membership test
    pub fn contains(&self, point: Point) -> bool {
        self.pixels.contains_key(&point)
    }

    /// Color stored at a coordinate
    pub fn color_at(&self, point: Point) -> Option<Color> {
        self.pixels.get(&point).copied()
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when no pixel is present
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate pixels in coordinate order
    pub fn iter(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.pixels.iter().map(|(&p, &c)| (p, c))
    }

    /// Iterate coordinates in order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.pixels.keys().copied()
    }

    /// Union with another region; pixels of `other` win on shared coordinates
    #[must_use]
    pub fn union(mut self, other: &Self) -> Self {
        self.union_in_place(other);
        self
    }

    /// In-place form of [`PixelRegion::union`]
    pub fn union_in_place(&mut self, other: &Self) {
        self.pixels
            .extend(other.pixels.iter().map(|(&p, &c)| (p, c)));
    }

    /// Remove every listed coordinate, whatever its color
    #[must_use]
    pub fn difference(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.remove_points(points);
        self
    }

    /// In-place form of [`PixelRegion::difference`]
    pub fn remove_points(&mut self, points: impl IntoIterator<Item = Point>) {
        for point in points {
            self.pixels.remove(&point);
        }
    }

    /// Translate every coordinate by `offset`
    #[must_use]
    pub fn shift(&self, offset: Point) -> Self {
        Self {
            pixels: self
                .pixels
                .iter()
                .map(|(&p, &c)| (p.offset(offset.x, offset.y), c))
                .collect(),
        }
    }

    /// Smallest box containing every pixel, `None` for an empty region
    pub fn bounding_box(&self) -> Option<Bounds> {
        let mut points = self.pixels.keys();
        let first = *points.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in points {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    /// Occupancy matrix over `[0, width) x [0, height)`, indexed `[y, x]`
    ///
    /// Pixels outside the canvas are ignored.
    pub fn to_boolean_matrix(&self, width: usize, height: usize) -> Array2<bool> {
        let mut matrix = Array2::from_elem((height, width), false);
        for point in self.pixels.keys() {
            if let Some(cell) = point
                .canvas_index(width, height)
                .and_then(|index| matrix.get_mut(index))
            {
                *cell = true;
            }
        }
        matrix
    }

    /// Restrict the region to pixels inside a `width x height` canvas
    #[must_use]
    pub fn clipped(&self, width: usize, height: usize) -> Self {
        Self {
            pixels: self
                .pixels
                .iter()
                .filter(|(p, _)| p.canvas_index(width, height).is_some())
                .map(|(&p, &c)| (p, c))
                .collect(),
        }
    }
}

impl FromIterator<(Point, Color)> for PixelRegion {
    fn from_iter<I: IntoIterator<Item = (Point, Color)>>(iter: I) -> Self {
        Self {
            pixels: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Point, Color)> for PixelRegion {
    fn extend<I: IntoIterator<Item = (Point, Color)>>(&mut self, iter: I) {
        self.pixels.extend(iter);
    }
}
