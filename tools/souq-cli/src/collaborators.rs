//! Console-backed link opener and notifier.

use std::process::{Command, Stdio};

use console::style;
use souq_commerce::{LinkOpener, Notifier};

use crate::output::Output;

/// Prints order links and optionally hands them to the desktop opener.
pub struct SystemLinkOpener {
    output: Output,
    launch: bool,
    program: &'static str,
}

impl SystemLinkOpener {
    pub fn new(output: Output, launch: bool) -> Self {
        Self {
            output,
            launch,
            program: desktop_opener(),
        }
    }

    /// Run the launcher and wait for it to exit. Returns whether it succeeded.
    fn run_launcher(&self, url: &str) -> bool {
        let program = self.program;
        // The desktop openers hand the URL off and exit, so waiting is short.
        match Command::new(program)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => {
                tracing::debug!(program, "launched link opener");
                true
            }
            Ok(status) => {
                tracing::warn!(program, %status, "link opener exited with failure");
                self.output
                    .warn(&format!("{} exited with {}", program, status));
                false
            }
            Err(e) => {
                tracing::warn!(program, error = %e, "failed to launch link opener");
                self.output
                    .warn(&format!("Could not run {}: {}", program, e));
                false
            }
        }
    }
}

fn desktop_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) {
        self.output.line(&format!("{} {}", style("🔗").bold(), url));
        if self.launch {
            self.run_launcher(url);
        }
    }
}

/// Renders notifications as a styled line.
pub struct ConsoleNotifier {
    output: Output,
}

impl ConsoleNotifier {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, description: &str) {
        self.output
            .success(&format!("{} {}", style(title).bold(), description));
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn opener(program: &'static str) -> SystemLinkOpener {
        SystemLinkOpener {
            output: Output::new(false, true),
            launch: true,
            program,
        }
    }

    #[test]
    fn test_launch_waits_for_exit_status() {
        assert!(opener("true").run_launcher("https://wa.me/97400000000"));
        assert!(!opener("false").run_launcher("https://wa.me/97400000000"));
    }

    #[test]
    fn test_missing_launcher_is_reported_not_fatal() {
        let missing = opener("souq-no-such-opener");
        assert!(!missing.run_launcher("https://wa.me/97400000000"));
        missing.open("https://wa.me/97400000000");
    }
}
