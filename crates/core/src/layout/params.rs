//! Reconstruction parameters.

/// Parameters controlling line reconstruction and output context.
///
/// The defaults are empirical constants tuned on dense financial-report
/// layouts and should normally be left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Maximum vertical distance for two words to count as the same
    /// visual line.
    pub y_tolerance: f64,

    /// Fraction of the page width past which a word's right edge counts
    /// as reaching the right margin.
    pub margin_ratio: f64,

    /// Page-height fraction below which wrap continuation is allowed when
    /// reconstructing a whole page.
    pub page_break_ratio: f64,

    /// Page-height fraction below which wrap continuation is allowed when
    /// reconstructing a vertical band.
    pub band_break_ratio: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            y_tolerance: 2.0,
            margin_ratio: 0.85,
            page_break_ratio: 0.9,
            band_break_ratio: 0.85,
        }
    }
}
