use crate::display::{DisplayMode, ModeCatalog};
use crate::error::Error;
use crate::request::ModeRequest;

/// Outcome of matching a request against a catalog.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Selection {
    /// The request names the mode the display is already using. Applying it
    /// would be a no-op, so the configurator must not be invoked at all.
    AlreadyActive(usize),
    /// Index of the catalog entry to apply.
    Change(usize),
}

/// Whether a candidate mode satisfies a request. The width must be equal;
/// height and scale are only compared when the request sets them, an unset
/// field matches any candidate value.
pub(crate) fn matches(request: &ModeRequest, mode: &DisplayMode) -> bool {
    request.width == mode.width
        && request.height.is_none_or(|height| height == mode.height)
        && request.scale.is_none_or(|scale| scale == mode.scale)
}

/// Picks the mode to apply for a request: the first satisfying entry in
/// catalog order. Catalog order is the only tie-break; when height or scale
/// are wildcards, several entries may satisfy the width and the earliest one
/// as enumerated by the display server wins.
pub(crate) fn select(request: &ModeRequest, catalog: &ModeCatalog) -> Result<Selection, Error> {
    let index = catalog
        .modes
        .iter()
        .position(|mode| matches(request, mode))
        .ok_or(Error::ModeNotAvailable)?;

    if catalog.current == Some(index) {
        Ok(Selection::AlreadyActive(index))
    } else {
        Ok(Selection::Change(index))
    }
}
