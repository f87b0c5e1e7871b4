/// A rectangle in CSS px units, in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Edges are inclusive, so a point on the right/bottom border still hits.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Visible width and height of `self` when clipped by `clip`.
    ///
    /// Values are negative when the rectangles do not overlap on that axis;
    /// callers comparing fractions rely on that rather than a clamp to zero.
    pub fn visible_extent_within(&self, clip: &Rectangle) -> (f32, f32) {
        let visible_x = self.right().min(clip.right()) - self.left().max(clip.left());
        let visible_y = self.bottom().min(clip.bottom()) - self.top().max(clip.top());
        (visible_x, visible_y)
    }

    /// Rounded centre relative to the rectangle's own top-left corner.
    pub fn center_offset(&self) -> Position {
        Position {
            top: (self.height / 2.0).round(),
            left: (self.width / 2.0).round(),
        }
    }
}

/// A pair of page coordinates (or a relative offset), in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

impl Position {
    pub const ZERO: Position = Position {
        top: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

impl std::ops::Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            top: self.top + rhs.top,
            left: self.left + rhs.left,
        }
    }
}

impl std::ops::AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.top += rhs.top;
        self.left += rhs.left;
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            top: self.top - rhs.top,
            left: self.left - rhs.left,
        }
    }
}
