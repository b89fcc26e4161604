//! Status display capability.

/// Minimal drawing surface for the status panel.
///
/// Coordinates are in pixels from the top-left corner. Drawing calls may
/// buffer; nothing is guaranteed visible before [`flush`](Self::flush).
pub trait StatusDisplay {
    /// Display driver error type.
    type Error: core::fmt::Debug;

    /// Blank the whole screen.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw text with its top-left corner at `(x, y)`.
    fn text(&mut self, text: &str, x: u8, y: u8) -> Result<(), Self::Error>;

    /// Draw a circle indicator.
    ///
    /// `highlighted` selects the lit style; `filled` fills the interior.
    fn circle(&mut self, x: u8, y: u8, r: u8, filled: bool, highlighted: bool) -> Result<(), Self::Error>;

    /// Push buffered drawing to the screen.
    fn flush(&mut self) -> Result<(), Self::Error>;
}
