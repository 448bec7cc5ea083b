use thiserror::Error;

/// Everything that can stop a resolve/match/apply cycle. All of these are
/// terminal for the invocation; nothing is retried and no mode change is
/// ever partially applied.
#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("no usable arguments were supplied; expected [display] width [height] [scale]")]
    DegenerateRequest,

    #[error("display {0} not found; run the list command to see connected displays")]
    DisplayNotFound(i64),

    #[error("no available mode satisfies the requested width/height/scale")]
    ModeNotAvailable,

    #[error("the display server rejected the selected mode: {0}")]
    ModeRejected(String),

    #[error("applying the selected mode failed: {0}")]
    ConfigurationFailed(String),

    #[error("could not read the display mode catalog: {0}")]
    CatalogUnavailable(String),

    #[error("could not toggle dark mode: {0}")]
    DarkModeUnavailable(String),
}
