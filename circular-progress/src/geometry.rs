//! Draw-rect layout.
//!
//! The arc is always drawn inside a square centered in the widget, so it stays
//! a true circle whatever the widget's aspect ratio. Every edge is inset by
//! half the thickest stroke plus one pixel, which keeps anti-aliased stroke
//! edges inside the widget bounds.

/// Extra inset, in physical pixels, kept outside the thickest stroke.
pub const ANTI_ALIAS_MARGIN: f32 = 1.0;

/// Axis-aligned rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl DrawRect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The square draw rect for a `width` x `height` widget whose thickest
    /// stroke is `thickness` wide.
    ///
    /// Returns `None` until the widget has a positive size. NaN sizes count
    /// as empty.
    pub fn inscribed(width: f32, height: f32, thickness: f32) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let inset = thickness / 2.0 + ANTI_ALIAS_MARGIN;
        let rect = if width > height {
            let offset = (width - height) / 2.0;
            DrawRect::new(
                offset + inset,
                inset,
                width - offset - inset,
                height - inset,
            )
        } else if width < height {
            let offset = (height - width) / 2.0;
            DrawRect::new(
                inset,
                offset + inset,
                width - inset,
                height - offset - inset,
            )
        } else {
            DrawRect::new(inset, inset, width - inset, height - inset)
        };
        Some(rect)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Radius of the circle inscribed in this rect.
    pub fn radius(&self) -> f32 {
        self.width() / 2.0
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Size constraint one axis of the widget receives from its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraint {
    /// The parent dictates the exact size.
    Exact(f32),
    /// The widget may be at most this large.
    AtMost(f32),
    /// The widget may pick any size.
    Unspecified,
}

impl SizeConstraint {
    /// Resolves the axis size, falling back to `default` where allowed.
    pub fn resolve(self, default: f32) -> f32 {
        match self {
            SizeConstraint::Exact(size) => size,
            SizeConstraint::AtMost(max) => default.min(max),
            SizeConstraint::Unspecified => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_widget() {
        let rect = DrawRect::inscribed(100.0, 100.0, 10.0).unwrap();
        assert_eq!(rect, DrawRect::new(6.0, 6.0, 94.0, 94.0));
        assert_eq!(rect.radius(), 44.0);
    }

    #[test]
    fn test_wide_widget_is_centered() {
        let rect = DrawRect::inscribed(200.0, 100.0, 4.0).unwrap();
        assert_eq!(rect, DrawRect::new(53.0, 3.0, 147.0, 97.0));
        assert_eq!(rect.width(), rect.height());
        assert_eq!(rect.center(), (100.0, 50.0));
    }

    #[test]
    fn test_tall_widget_is_centered() {
        let rect = DrawRect::inscribed(80.0, 120.0, 2.0).unwrap();
        assert_eq!(rect, DrawRect::new(2.0, 22.0, 78.0, 98.0));
        assert_eq!(rect.width(), rect.height());
    }

    #[test]
    fn test_empty_widget_has_no_rect() {
        assert_eq!(DrawRect::inscribed(0.0, 100.0, 2.0), None);
        assert_eq!(DrawRect::inscribed(100.0, -1.0, 2.0), None);
        assert_eq!(DrawRect::inscribed(f32::NAN, 100.0, 2.0), None);
    }

    #[test]
    fn test_constraint_resolution() {
        assert_eq!(SizeConstraint::Exact(30.0).resolve(48.0), 30.0);
        assert_eq!(SizeConstraint::Exact(300.0).resolve(48.0), 300.0);
        assert_eq!(SizeConstraint::AtMost(30.0).resolve(48.0), 30.0);
        assert_eq!(SizeConstraint::AtMost(300.0).resolve(48.0), 48.0);
        assert_eq!(SizeConstraint::Unspecified.resolve(48.0), 48.0);
    }
}
