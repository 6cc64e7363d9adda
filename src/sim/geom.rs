//! Axis-aligned rectangles in screen space
//!
//! Screen coordinates: x grows to the right, y grows downward, the play field
//! spans `[0, width] x [0, height]`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect whose top edge is centered on `point`
    pub fn from_midtop(point: Vec2, width: f32, height: f32) -> Self {
        Self::new(point.x - width / 2.0, point.y, width, height)
    }

    /// Build a rect whose bottom edge is centered on `point`
    pub fn from_midbottom(point: Vec2, width: f32, height: f32) -> Self {
        Self::new(point.x - width / 2.0, point.y - height, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn midtop(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.top())
    }

    /// The four corners: top-left, bottom-left, top-right, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.left(), self.bottom()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.right(), self.bottom()),
        ]
    }

    /// Strict overlap test; rects that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
