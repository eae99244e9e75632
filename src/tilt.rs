//! Pointer tracking for the tilting profile photo.
//!
//! The photo rotates towards the pointer while hovered. All the state is the
//! pointer position relative to the photo's box, normalised to `[-0.5, 0.5]`
//! on both axes with `(0, 0)` at the centre; the CSS transform is derived from
//! it on every render.

use crate::config::{TILT_DEGREES, TILT_SCALE};

/// Bounding box of the tracked element in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    offset: Offset,
    hovering: bool,
}

fn axis(pointer: f64, start: f64, len: f64) -> f64 {
    if len <= 0.0 || !len.is_finite() {
        return 0.0;
    }
    ((pointer - start) / len).clamp(0.0, 1.0) - 0.5
}

impl TiltState {
    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn pointer_move(&mut self, bounds: Bounds, pointer_x: f64, pointer_y: f64) {
        self.offset = Offset {
            x: axis(pointer_x, bounds.left, bounds.width),
            y: axis(pointer_y, bounds.top, bounds.height),
        };
    }

    pub fn pointer_enter(&mut self) {
        self.hovering = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovering = false;
        self.offset = Offset::default();
    }

    /// Transform for the photo card itself.
    pub fn card_transform(&self) -> String {
        if self.hovering {
            format!(
                "rotateX({}deg) rotateY({}deg) scale({})",
                self.offset.y * -TILT_DEGREES,
                self.offset.x * TILT_DEGREES,
                TILT_SCALE
            )
        } else {
            "rotateX(0deg) rotateY(0deg) scale(1)".to_string()
        }
    }

    /// Transform for a badge floating `depth` px above the card, shifted by
    /// `parallax` px per unit of offset.
    pub fn badge_transform(&self, depth: f64, parallax: f64) -> String {
        format!(
            "translateZ({depth}px) translateX({}px) translateY({}px)",
            self.offset.x * parallax,
            self.offset.y * parallax
        )
    }
}
