/// A 2D area represented by a min + max coordinate pair.
///
/// The two coordinates form an _inclusive_ 2D range, i.e. unlike in a
/// half-open range, it's possible for a point with `x == x_max`
/// to be contained in the area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && y >= self.y_min && x <= self.x_max && y <= self.y_max
    }

    pub fn singleton(x: i32, y: i32) -> Self {
        Self {
            x_min: x,
            y_min: y,
            x_max: x,
            y_max: y,
        }
    }

    pub fn from_coordinates_iter(mut iter: impl Iterator<Item = (i32, i32)>) -> Option<Self> {
        let (x0, y0) = iter.next()?;
        let mut bbox = Self::singleton(x0, y0);
        for (x, y) in iter {
            bbox.update(x, y);
        }
        Some(bbox)
    }

    /// Expands the bounding box to cover point `(x, y)`.
    pub fn update(&mut self, x: i32, y: i32) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Number of columns covered. Widened to avoid overflow at the extremes of `i32`.
    pub fn width(&self) -> u64 {
        (i64::from(self.x_max) - i64::from(self.x_min) + 1) as u64
    }

    pub fn height(&self) -> u64 {
        (i64::from(self.y_max) - i64::from(self.y_min) + 1) as u64
    }
}
