use std::process;

use crate::display::{DisplayMode, ModeCatalog};
use crate::error::Error;
use crate::utils::run;

mod parsing;

struct Swaymsg {
    command: process::Command,
}

impl Swaymsg {
    fn new() -> Self {
        Self {
            command: process::Command::new("swaymsg"),
        }
    }

    fn get_outputs(mut self) -> Self {
        self.command.arg("-t").arg("get_outputs");
        self
    }

    fn set_mode(mut self, output_name: &str, mode: &DisplayMode) -> Self {
        self.command.arg(format!(
            "output \"{output_name}\" mode {}x{}@{}.{:03}Hz scale {}",
            mode.width,
            mode.height,
            mode.frequency / 1000,
            mode.frequency % 1000,
            mode.scale,
        ));
        self
    }

    fn command(self) -> process::Command {
        self.command
    }
}

pub(super) fn mode_catalogs() -> Result<Vec<ModeCatalog>, Error> {
    let output = run(Swaymsg::new().get_outputs().command()).map_err(Error::CatalogUnavailable)?;
    parsing::parse(&output.stdout).map_err(Error::CatalogUnavailable)
}

pub(super) fn apply(catalog: &ModeCatalog, mode: &DisplayMode) -> Result<(), Error> {
    let output = run(Swaymsg::new().set_mode(&catalog.name, mode).command())
        .map_err(Error::ConfigurationFailed)?;

    // swaymsg can exit successfully while reporting a refused command in its
    // reply, e.g. for a mode the current session cannot use.
    parsing::check_replies(&output.stdout).map_err(Error::ModeRejected)
}
