//! ViewportFitter - orthographic camera extents from the canvas client rect
//!
//! The world is always `distance` units wide; the visible height follows the
//! canvas aspect ratio, so a portrait phone sees a tall, narrow box.

use serde::Serialize;

/// Orthographic extents centered on the origin (world units)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrthoFrame {
    /// Surface size in CSS pixels
    pub width: f32,
    pub height: f32,
    pub distance: f32,
    /// height / width
    pub aspect: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl OrthoFrame {
    pub fn from_surface(width: f32, height: f32, distance: f32) -> Self {
        let valid = width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite();
        let aspect = if valid { height / width } else { 0.0 };

        let left = -distance / 2.0;
        let right = distance / 2.0;
        Self {
            width,
            height,
            distance,
            aspect,
            left,
            right,
            bottom: left * aspect,
            top: right * aspect,
        }
    }

    /// True when the surface was not attached yet (zero client rect).
    pub fn is_degenerate(&self) -> bool {
        !(self.aspect > 0.0) || !(self.distance > 0.0) || !self.distance.is_finite()
    }

    pub fn visible_width(&self) -> f32 {
        self.right - self.left
    }

    pub fn visible_height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportFitter {
    distance: f32,
}

impl ViewportFitter {
    /// `distance` is the visible world width
    pub fn new(distance: f32) -> Self {
        Self { distance }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn fit(&self, surface_width: f32, surface_height: f32) -> OrthoFrame {
        OrthoFrame::from_surface(surface_width, surface_height, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_800_by_600() {
        let frame = ViewportFitter::new(100.0).fit(800.0, 600.0);
        assert_eq!(frame.aspect, 0.75);
        assert_eq!(frame.left, -50.0);
        assert_eq!(frame.right, 50.0);
        assert_eq!(frame.bottom, -37.5);
        assert_eq!(frame.top, 37.5);
        assert!(!frame.is_degenerate());
    }

    #[test]
    fn frame_is_symmetric() {
        for &(w, h, d) in &[(800.0, 600.0, 100.0), (390.0, 844.0, 37.0), (1.0, 3.0, 7.5)] {
            let frame = OrthoFrame::from_surface(w, h, d);
            assert_eq!(frame.right, -frame.left);
            assert_eq!(frame.top, -frame.bottom);
            assert_eq!(frame.top, frame.right * frame.aspect);
            assert_eq!(frame.bottom, frame.left * frame.aspect);
        }
    }

    #[test]
    fn portrait_phone_sees_taller_world() {
        let frame = ViewportFitter::new(37.0).fit(390.0, 844.0);
        assert!(frame.visible_height() > frame.visible_width());
        assert_eq!(frame.visible_width(), 37.0);
    }

    #[test]
    fn detached_surface_is_degenerate() {
        let frame = ViewportFitter::new(100.0).fit(0.0, 0.0);
        assert!(frame.is_degenerate());
        assert_eq!(frame.visible_height(), 0.0);

        assert!(ViewportFitter::new(100.0).fit(800.0, 0.0).is_degenerate());
        assert!(ViewportFitter::new(0.0).fit(800.0, 600.0).is_degenerate());
    }
}
