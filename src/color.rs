use eframe::egui::Color32;
use palette::{named, Srgb};

// ---------------------------------------------------------------------------
// Curve colours
// ---------------------------------------------------------------------------

/// Colours a chart curve can be drawn in, named like their CSS counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveColor {
    Blue,
    Red,
}

impl CurveColor {
    fn srgb(self) -> Srgb<u8> {
        match self {
            CurveColor::Blue => named::BLUE,
            CurveColor::Red => named::RED,
        }
    }

    /// The egui colour used when painting the curve.
    pub fn to_color32(self) -> Color32 {
        let rgb = self.srgb();
        Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<CurveColor> for Color32 {
    fn from(color: CurveColor) -> Self {
        color.to_color32()
    }
}
