use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn min(self, other: Self) -> Self {
        Position::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Position::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// True if the position addresses a pixel of the 280x192 screen.
    pub fn is_on_screen(&self) -> bool {
        (0..SCREEN_WIDTH).contains(&self.x) && (0..SCREEN_HEIGHT).contains(&self.y)
    }
}

impl Sub<Position> for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Position { x: value.0, y: value.1 }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<Position> for Size {
    fn from(value: Position) -> Self {
        Size {
            width: value.x,
            height: value.y,
        }
    }
}

/// A pixel rectangle. `right()` and `bottom()` are exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub start: Position,
    pub size: Size,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(x:{}, y:{}, width: {}, height: {})",
            self.start.x, self.start.y, self.size.width, self.size.height
        )
    }
}

impl Rectangle {
    pub fn new(start: Position, size: Size) -> Self {
        Self { start, size }
    }

    pub fn from(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            start: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Builds the rectangle spanned by two corner pixels, both included.
    pub fn from_corners(p0: Position, p1: Position) -> Self {
        let start = p0.min(p1);
        let end = p0.max(p1);
        Rectangle {
            start,
            size: Size::new(end.x - start.x + 1, end.y - start.y + 1),
        }
    }

    /// The whole 280x192 screen.
    pub fn screen() -> Self {
        Self::from(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn left(&self) -> i32 {
        self.start.x
    }

    pub fn right(&self) -> i32 {
        self.start.x + self.size.width
    }

    pub fn top(&self) -> i32 {
        self.start.y
    }

    pub fn bottom(&self) -> i32 {
        self.start.y + self.size.height
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    pub fn contains_pt(&self, point: Position) -> bool {
        self.left() <= point.x && point.x < self.right() && self.top() <= point.y && point.y < self.bottom()
    }

    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.left()..self.right()
    }

    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.top()..self.bottom()
    }

    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let min = self.start.max(other.start);
        let max = Position::new(self.right().min(other.right()), self.bottom().min(other.bottom()));
        if max.x <= min.x || max.y <= min.y {
            return Rectangle::new(min, Size::default());
        }
        Rectangle {
            start: min,
            size: (max - min).into(),
        }
    }

    pub fn union(&self, other: &Rectangle) -> Rectangle {
        if self.is_empty() {
            return *other;
        }

        if other.is_empty() {
            return *self;
        }

        let min = self.start.min(other.start);
        let max = Position::new(self.right().max(other.right()), self.bottom().max(other.bottom()));
        Rectangle {
            start: min,
            size: (max - min).into(),
        }
    }

    /// Grows the rectangle so it covers `pt`.
    pub fn include_pt(&self, pt: Position) -> Rectangle {
        self.union(&Rectangle::from(pt.x, pt.y, 1, 1))
    }

    /// Widens the rectangle by one pixel left and right, clipped to the screen.
    ///
    /// Pixel color depends on both horizontal neighbours, so a changed bit can
    /// alter the displayed color next to the written area.
    pub fn expand_for_render(&self) -> Rectangle {
        if self.is_empty() {
            return *self;
        }
        Rectangle::from(self.left() - 1, self.top(), self.width() + 2, self.height()).intersect(&Rectangle::screen())
    }
}
