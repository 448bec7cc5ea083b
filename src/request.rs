/// Assume at most 8 connected displays. A leading value above this cannot be
/// a display index and is read as a width instead.
pub(crate) const MAX_DISPLAYS: i32 = 8;

/// Upper bound on a plausible scale factor. A third value above this is read
/// as a height, at or below it as a scale factor.
pub(crate) const MAX_SCALE: i32 = 10;

/// A display-configuration request resolved from the command line.
///
/// `height` and `scale` are wildcards when unset: any value of that field on
/// a candidate mode is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModeRequest {
    pub(crate) display_index: i32,
    pub(crate) width: i32,
    pub(crate) height: Option<i32>,
    pub(crate) scale: Option<i32>,
}

impl ModeRequest {
    /// A degenerate request carries no usable width and must not be matched
    /// against any catalog.
    pub(crate) fn is_degenerate(&self) -> bool {
        self.width == 0
    }
}

/// Resolves the numeric arguments of the set command into a request.
///
/// Supported argument forms:
///   width
///   index width
///   width scale
///   width height
///   index width height
///   index width scale
///   index width height scale
///   index width scale height
///
/// The forms are disambiguated purely by magnitude: a first value above
/// MAX_DISPLAYS means the index was omitted, a third value above MAX_SCALE is
/// a height rather than a scale factor. A value of exactly 11 is always a
/// height and 10 always a scale, whatever the caller meant.
pub(crate) fn resolve<S: AsRef<str>>(tokens: &[S]) -> ModeRequest {
    // Tokens that do not parse as integers are dropped and the remaining
    // values close ranks, which shifts how the heuristic reads every later
    // position. Kept for compatibility with the established command forms;
    // likely a latent defect for mistyped input.
    let mut values: Vec<i32> = tokens
        .iter()
        .filter_map(|token| token.as_ref().parse().ok())
        .collect();

    let degenerate = ModeRequest {
        display_index: 0,
        width: 0,
        height: None,
        scale: None,
    };

    let Some(&first) = values.first() else {
        return degenerate;
    };

    if first > MAX_DISPLAYS {
        // The display index was omitted; the first value is already the
        // width.
        values.insert(0, 0);
    }

    if values.len() < 2 {
        return degenerate;
    }

    let mut request = ModeRequest {
        display_index: values[0],
        width: values[1],
        height: None,
        scale: None,
    };

    if let Some(&third) = values.get(2) {
        if third > MAX_SCALE {
            request.height = Some(third);
            request.scale = values.get(3).copied();
        } else {
            request.scale = Some(third);
            request.height = values.get(3).copied();
        }
    }

    request
}
