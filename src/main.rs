#![forbid(unsafe_code)]
mod dark_mode;
mod display;
mod display_controller;
mod error;
mod matching;
mod request;
mod utils;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::display_controller::DisplayController;
use crate::error::Error;

#[derive(Parser)]
#[command(author, version, about, arg_required_else_help(true))]
struct Args {
    /// Method to use for querying displays and applying mode changes.
    #[arg(long, env = "SWITCH_RESOLUTION_CONTROLLER")]
    controller: DisplayController,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List connected displays and the mode each one is currently using.
    List,
    /// List every mode reported for one display.
    Modes {
        /// Zero-based display index, as shown by the list command.
        #[arg(default_value_t = 0)]
        display_index: usize,
    },
    /// Set the mode of a display.
    ///
    /// Takes up to four numeric arguments: [display] width [height] [scale].
    /// The display index defaults to 0. A third argument above 10 is read as
    /// a height, otherwise as a scale factor; a fourth argument fills in
    /// whichever of the two is still missing. Fields left out match any
    /// value, and the first matching mode in the display server's own order
    /// wins.
    Set {
        /// Numeric arguments, e.g. `0 1920 1080 2`.
        arguments: Vec<String>,
    },
    /// Toggle the desktop between light and dark appearance.
    DarkMode,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    match &args.command {
        Command::List => list_displays(args.controller),
        Command::Modes { display_index } => list_modes(args.controller, *display_index),
        Command::Set { arguments } => set_mode(args.controller, arguments),
        Command::DarkMode => dark_mode::toggle(),
    }
}

fn list_displays(controller: DisplayController) -> Result<(), Error> {
    let catalogs = controller.mode_catalogs()?;
    log::trace!("catalogs = {catalogs:?}");

    for (index, catalog) in catalogs.iter().enumerate() {
        match catalog.current.and_then(|current| catalog.modes.get(current)) {
            Some(mode) => println!("Display {index} ({}): {mode}", catalog.name),
            None => println!("Display {index} ({}): off", catalog.name),
        }
    }

    Ok(())
}

fn list_modes(controller: DisplayController, display_index: usize) -> Result<(), Error> {
    let catalogs = controller.mode_catalogs()?;
    log::trace!("catalogs = {catalogs:?}");

    let catalog = catalogs
        .get(display_index)
        .ok_or(Error::DisplayNotFound(display_index as i64))?;

    println!("Supported modes for display {display_index} ({}):", catalog.name);
    for (index, mode) in catalog.modes.iter().enumerate() {
        let marker = if catalog.current == Some(index) {
            "  --> "
        } else {
            "      "
        };
        println!("{marker}{mode}");
    }

    Ok(())
}

fn set_mode(controller: DisplayController, arguments: &[String]) -> Result<(), Error> {
    let request = request::resolve(arguments);
    log::debug!("request = {request:?}");

    if request.is_degenerate() {
        return Err(Error::DegenerateRequest);
    }

    let catalogs = controller.mode_catalogs()?;
    log::trace!("catalogs = {catalogs:?}");

    let catalog = usize::try_from(request.display_index)
        .ok()
        .and_then(|index| catalogs.get(index))
        .ok_or(Error::DisplayNotFound(i64::from(request.display_index)))?;

    match matching::select(&request, catalog)? {
        matching::Selection::AlreadyActive(index) => {
            log::debug!("mode {index} is already active, nothing to do");
            Ok(())
        }
        matching::Selection::Change(index) => {
            let mode = &catalog.modes[index];
            println!("Setting display {} to{mode}", request.display_index);
            controller.apply(catalog, mode)
        }
    }
}
