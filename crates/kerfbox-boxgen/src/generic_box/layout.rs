//! Placement of the parts on the page.

use kerfbox_core::material::LAYOUT_GAP;
use kerfbox_core::BoundingBox;

/// Running extent of everything drawn so far, used to place new parts
/// beside or below it. The high sides keep a gap past the last part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    extent: BoundingBox,
}

impl PageLayout {
    pub fn new() -> Self {
        Self {
            extent: BoundingBox::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn extent(&self) -> BoundingBox {
        self.extent
    }

    /// First free column right of the drawn parts
    pub fn right(&self) -> f64 {
        self.extent.max_x
    }

    /// First free row below the drawn parts
    pub fn bottom(&self) -> f64 {
        self.extent.max_y
    }

    /// Record a drawn part
    pub fn add(&mut self, part: &BoundingBox) {
        let e = &mut self.extent;
        e.min_x = e.min_x.min(part.min_x);
        e.min_y = e.min_y.min(part.min_y);
        if part.max_x > e.max_x - LAYOUT_GAP {
            e.max_x = part.max_x + LAYOUT_GAP;
        }
        if part.max_y > e.max_y - LAYOUT_GAP {
            e.max_y = part.max_y + LAYOUT_GAP;
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_leave_a_gap() {
        let mut layout = PageLayout::new();
        layout.add(&BoundingBox::new(0.0, 0.0, 46.0, 66.0));
        assert_eq!(layout.right(), 48.0);
        assert_eq!(layout.bottom(), 68.0);

        // a part ending inside the gap still pushes the extent
        layout.add(&BoundingBox::new(48.0, 0.0, 47.0, 67.0));
        assert_eq!(layout.bottom(), 69.0);

        // a smaller part changes nothing
        layout.add(&BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(layout.extent(), BoundingBox::new(0.0, 0.0, 49.0, 69.0));
    }
}
