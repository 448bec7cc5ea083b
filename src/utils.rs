use std::process;

/// Runs an external command and captures its output. Failure to start the
/// command and a non-zero exit status are both reported as a message ready
/// to be wrapped into the caller's error kind.
pub(crate) fn run(mut command: process::Command) -> Result<process::Output, String> {
    log::debug!("Running {command:?}");

    let output = command
        .output()
        .map_err(|error| format!("failed to start {command:?}: {error}"))?;

    log::debug!("Output: {output:?}");

    if !output.status.success() {
        return Err(format!(
            "{command:?} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(output)
}

#[cfg(test)]
pub(crate) fn assert_command_eq(
    actual: &std::process::Command,
    expected_program: &str,
    expected_args: &[&str],
) {
    assert_eq!(
        actual
            .get_program()
            .to_str()
            .expect("program name is not valid utf-8"),
        expected_program
    );

    let actual_args: Vec<&str> = actual
        .get_args()
        .map(|arg| arg.to_str().expect("argument is not valid utf-8"))
        .collect();

    assert_eq!(actual_args, expected_args);
}
