use crate::display::{DisplayMode, ModeCatalog};
use crate::error::Error;
use crate::utils::run;
use std::process;

mod parsing;

struct Xrandr {
    command: process::Command,
}

impl Xrandr {
    fn new() -> Self {
        let command = process::Command::new("xrandr");
        Self { command }
    }

    fn output(mut self, output_name: &str) -> Self {
        self.command.arg("--output").arg(output_name);
        self
    }

    fn mode(mut self, mode: &DisplayMode) -> Self {
        self.command
            .arg("--mode")
            .arg(format!("{}x{}", mode.width, mode.height))
            .arg("--rate")
            // Millihertz back to the fractional form xrandr listed,
            // e.g. 60020 -> "60.02".
            .arg(format!("{}.{:02}", mode.frequency / 1000, (mode.frequency % 1000) / 10));
        self
    }

    fn command(self) -> process::Command {
        self.command
    }
}

pub(super) fn mode_catalogs() -> Result<Vec<ModeCatalog>, Error> {
    let output = run(Xrandr::new().command()).map_err(Error::CatalogUnavailable)?;
    let stdout = String::from_utf8(output.stdout)
        .map_err(|error| Error::CatalogUnavailable(format!("xrandr output is invalid utf-8: {error}")))?;
    Ok(parsing::parse(&stdout))
}

pub(super) fn apply(catalog: &ModeCatalog, mode: &DisplayMode) -> Result<(), Error> {
    run(Xrandr::new().output(&catalog.name).mode(mode).command())
        .map(drop)
        .map_err(Error::ConfigurationFailed)
}
