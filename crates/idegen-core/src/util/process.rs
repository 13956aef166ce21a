//! Process execution utilities.

use idegen_types::Result;
use std::ffi::OsStr;
use std::process::{Command, Stdio};
use tracing::debug;

/// Launch a program without waiting for it.
///
/// Standard streams are detached so a long-lived GUI process does not hold
/// the caller's terminal. Returns the child's process id.
pub fn spawn_detached<I, S>(program: impl AsRef<OsStr>, args: I) -> Result<u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    debug!("Spawned {:?} as pid {}", program, child.id());
    Ok(child.id())
}
