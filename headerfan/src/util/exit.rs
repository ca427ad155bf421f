use std::{io, process::ExitStatus};

/// Renders the outcome of running a command as a short code for logs.
///
/// `"0"` on success, the exit code otherwise, and `"?"` when the command never ran or was killed by a signal.
///
/// ```
/// # use headerfan::util::exit_status;
/// let status = std::process::Command::new("true").status();
/// assert_eq!("0", exit_status(&status));
/// ```
pub fn exit_status(result: &io::Result<ExitStatus>) -> String {
    match result {
        Ok(status) => match status.code() {
            Some(code) => code.to_string(),
            None => {
                log::debug!("command terminated without exit code: {}", status);
                "?".to_string()
            }
        },
        Err(e) => {
            log::debug!("command failed to run: {}", e);
            "?".to_string()
        }
    }
}
