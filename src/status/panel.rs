//! Status panel rendered on a small monochrome display.
//!
//! Layout:
//!
//! ```text
//!  _____________
//! |  Sort Line  |   title
//! |   o o o o   |   inputs  (optical, go, jog-retract, jog-extend)
//! |   o o o o o |   outputs (conveyor, punch, diverter, piston A, piston B)
//! | SILV        |   category label
//! |      0200   |   color reading
//!  ¯¯¯¯¯¯¯¯¯¯¯¯¯
//! ```

use core::fmt::Write;

use crate::color::ColorCategory;
use crate::config::units::{ColorReading, CycleCount};
use crate::io::{Actuator, Input, IoSnapshot};
use crate::line::RunSummary;

use super::display::StatusDisplay;
use super::observer::CycleObserver;

const GLYPH_X0: u8 = 12;
const GLYPH_PITCH: u8 = 8;
const INPUT_ROW_Y: u8 = 12;
const OUTPUT_ROW_Y: u8 = 20;
const CATEGORY_POS: (u8, u8) = (0, 27);
const READING_POS: (u8, u8) = (30, 36);

/// [`CycleObserver`] that draws line status on a [`StatusDisplay`].
///
/// Display errors are logged and dropped.
pub struct StatusPanel<D: StatusDisplay> {
    display: D,
    title: &'static str,
}

impl<D: StatusDisplay> StatusPanel<D> {
    /// Create a panel with the default title.
    pub fn new(display: D) -> Self {
        Self::with_title(display, " Sort Line")
    }

    /// Create a panel with a custom title line.
    pub fn with_title(display: D, title: &'static str) -> Self {
        Self { display, title }
    }

    /// Borrow the underlying display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Release the underlying display.
    pub fn into_inner(self) -> D {
        self.display
    }

    fn check(result: Result<(), D::Error>) {
        if result.is_err() {
            log_warn!("status display write failed");
        }
    }

    fn text(&mut self, text: &str, x: u8, y: u8) {
        Self::check(self.display.text(text, x, y));
    }

    fn flush(&mut self) {
        Self::check(self.display.flush());
    }

    fn clear(&mut self) {
        Self::check(self.display.clear());
    }

    fn glyph_row(&mut self, y: u8, levels: impl Iterator<Item = bool>) {
        let mut x = GLYPH_X0;
        for on in levels {
            Self::check(self.display.circle(x, y, 2, true, on));
            x += GLYPH_PITCH;
        }
    }
}

impl<D: StatusDisplay> CycleObserver for StatusPanel<D> {
    fn tracks_io(&self) -> bool {
        true
    }

    fn on_standby(&mut self) {
        self.clear();
        let title = self.title;
        self.text(title, 0, 0);
        self.text(" Press To ", 0, 27);
        self.text("Start Sort", 0, 38);
        self.flush();
    }

    fn on_run_started(&mut self, _cycles: CycleCount) {
        self.clear();
        let title = self.title;
        self.text(title, 0, 0);
        let mut x = GLYPH_X0;
        while x < 52 {
            Self::check(self.display.circle(x, INPUT_ROW_Y, 3, true, true));
            Self::check(self.display.circle(x, OUTPUT_ROW_Y, 3, true, true));
            x += GLYPH_PITCH;
        }
        self.flush();
    }

    fn on_tick(&mut self, io: &IoSnapshot) {
        let sensors = io.sensors;
        let actuators = io.actuators;
        self.glyph_row(INPUT_ROW_Y, Input::ALL.iter().map(|&i| sensors.get(i)));
        self.glyph_row(OUTPUT_ROW_Y, Actuator::ALL.iter().map(|&a| actuators.get(a)));
        self.flush();
    }

    fn on_reading(&mut self, reading: Option<ColorReading>) {
        let value = reading.map(|r| r.0).unwrap_or(0);
        let mut digits: heapless::String<8> = heapless::String::new();
        let _ = write!(digits, "{:04}", value);
        self.text(&digits, READING_POS.0, READING_POS.1);
    }

    fn on_category(&mut self, category: ColorCategory) {
        self.text(category.label(), CATEGORY_POS.0, CATEGORY_POS.1);
        self.flush();
    }

    fn on_run_complete(&mut self, _summary: &RunSummary) {
        self.clear();
        self.text("   Sorting", 0, 0);
        self.text(" Complete.", 0, 9);
        self.flush();
    }
}
