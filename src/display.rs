use std::fmt;

/// One hardware-reported configuration of a display. `frequency` is in
/// millihertz, i.e. 60000 is 60 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DisplayMode {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) scale: i32,
    pub(crate) frequency: i32,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Five digits are enough for the dimensions of any monitor we expect
        // to meet.
        write!(
            f,
            "{:5} x {:4} @ {}x @ {}Hz",
            self.width,
            self.height,
            self.scale,
            self.frequency / 1000
        )
    }
}

/// Immutable snapshot of one display: every mode the display server reports
/// for it, in the server's own enumeration order.
#[derive(Debug)]
pub(crate) struct ModeCatalog {
    /// Output name as known to the display server, e.g. "eDP-1".
    pub(crate) name: String,
    pub(crate) modes: Vec<DisplayMode>,
    /// Index of the mode the display is currently using; `None` when the
    /// display is off or the server did not identify an active mode.
    pub(crate) current: Option<usize>,
}
