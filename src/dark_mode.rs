use std::process;

use crate::error::Error;
use crate::utils::run;

const SCHEMA: &str = "org.gnome.desktop.interface";
const KEY: &str = "color-scheme";
const DARK: &str = "prefer-dark";
const LIGHT: &str = "default";

struct Gsettings {
    command: process::Command,
}

impl Gsettings {
    fn get() -> Self {
        let mut command = process::Command::new("gsettings");
        command.arg("get").arg(SCHEMA).arg(KEY);
        Self { command }
    }

    fn set(scheme: &str) -> Self {
        let mut command = process::Command::new("gsettings");
        command.arg("set").arg(SCHEMA).arg(KEY).arg(scheme);
        Self { command }
    }

    fn command(self) -> process::Command {
        self.command
    }
}

/// Flips the desktop between light and dark appearance and prints the new
/// state.
pub(crate) fn toggle() -> Result<(), Error> {
    let output = run(Gsettings::get().command()).map_err(Error::DarkModeUnavailable)?;
    let current = String::from_utf8_lossy(&output.stdout);

    let next = if current.contains(DARK) { LIGHT } else { DARK };
    run(Gsettings::set(next).command()).map_err(Error::DarkModeUnavailable)?;

    println!("Dark mode: {}", if next == DARK { "on" } else { "off" });
    Ok(())
}
