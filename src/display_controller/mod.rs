use crate::display::{DisplayMode, ModeCatalog};
use crate::error::Error;

#[cfg(feature = "sway")]
mod sway;
#[cfg(feature = "xrandr")]
mod xrandr;

/// Method used to query displays and apply mode changes.
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub(crate) enum DisplayController {
    /// Shell out to xrandr. X11 has no per-mode scale factor, so every mode
    /// reports a scale of 1.
    #[cfg(feature = "xrandr")]
    Xrandr,
    /// Talk to sway via swaymsg.
    #[cfg(feature = "sway")]
    Sway,
}

impl DisplayController {
    /// Takes a fresh snapshot of every display and its modes, in the order
    /// the display server enumerates them. That order is meaningful: it is
    /// the tie-break when a request matches several modes.
    pub(crate) fn mode_catalogs(&self) -> Result<Vec<ModeCatalog>, Error> {
        match *self {
            #[cfg(feature = "xrandr")]
            DisplayController::Xrandr => xrandr::mode_catalogs(),
            #[cfg(feature = "sway")]
            DisplayController::Sway => sway::mode_catalogs(),
        }
    }

    /// Applies one mode from a catalog to its display.
    pub(crate) fn apply(&self, catalog: &ModeCatalog, mode: &DisplayMode) -> Result<(), Error> {
        match *self {
            #[cfg(feature = "xrandr")]
            DisplayController::Xrandr => xrandr::apply(catalog, mode),
            #[cfg(feature = "sway")]
            DisplayController::Sway => sway::apply(catalog, mode),
        }
    }
}
