//! Page geometry for the four-card sheet.
//!
//! All layout coordinates are in device units (PDF points) with the
//! origin at the top-left of the page; the op emitters in `layout`
//! flip to PDF's bottom-left origin when writing out.

use crate::types::{CardError, Result};

/// Fixed page size, 1240x1754 pt (A4-ish at 150 dpi), margin 0.
pub const PAGE_WIDTH: f32 = 1240.0;
pub const PAGE_HEIGHT: f32 = 1754.0;

/// One of the four equal quadrants of a page, numbered 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn slot(self) -> u8 {
        match self {
            Quadrant::TopLeft => 1,
            Quadrant::TopRight => 2,
            Quadrant::BottomLeft => 3,
            Quadrant::BottomRight => 4,
        }
    }

    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Quadrant::TopLeft),
            2 => Some(Quadrant::TopRight),
            3 => Some(Quadrant::BottomLeft),
            4 => Some(Quadrant::BottomRight),
            _ => None,
        }
    }
}

/// Page dimensions plus the derived quadrant grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
        }
    }
}

impl PageGeometry {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(CardError::Config(format!(
                "page dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn half_width(self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(self) -> f32 {
        self.height / 2.0
    }

    /// Top-left corner of a quadrant, in layout space.
    ///
    /// The slot-to-origin mapping is fixed: 1 -> (0,0),
    /// 2 -> (w/2,0), 3 -> (0,h/2), 4 -> (w/2,h/2).
    pub fn quadrant_origin(self, quadrant: Quadrant) -> (f32, f32) {
        match quadrant {
            Quadrant::TopLeft => (0.0, 0.0),
            Quadrant::TopRight => (self.half_width(), 0.0),
            Quadrant::BottomLeft => (0.0, self.half_height()),
            Quadrant::BottomRight => (self.half_width(), self.half_height()),
        }
    }
}
