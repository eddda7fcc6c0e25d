use std::io;
use std::process::Command;

/// Runs condition checks and snippet evaluation on behalf of the engine.
///
/// Injected at expander construction so the matching and rendering logic is
/// testable without spawning real processes.
pub trait ShellExecutor {
    /// Run `command` and report whether it exited successfully.
    fn status(&self, command: &str) -> bool;

    /// Run `command` and capture its stdout. Spawn failure and non-zero
    /// exit are both errors.
    fn output(&self, command: &str) -> io::Result<String>;
}

/// Executes through the user's `bash` with the inherited environment,
/// blocking until the child exits. No timeout is enforced.
pub struct SystemShell;

impl ShellExecutor for SystemShell {
    fn status(&self, command: &str) -> bool {
        Command::new("bash")
            .arg("-c")
            .arg(command)
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn output(&self, command: &str) -> io::Result<String> {
        let out = Command::new("bash").arg("-c").arg(command).output()?;
        if !out.status.success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("command exited with {}", out.status),
            ));
        }
        String::from_utf8(out.stdout)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_exit_code() {
        let shell = SystemShell;
        assert!(shell.status("true"));
        assert!(!shell.status("false"));
    }

    #[test]
    fn output_captures_stdout() {
        let shell = SystemShell;
        let out = shell.output("printf '%s' hello").expect("run printf");
        assert_eq!(out, "hello");
    }

    #[test]
    fn output_fails_on_non_zero_exit() {
        let shell = SystemShell;
        assert!(shell.output("exit 3").is_err());
    }
}
