//! Compiler subprocess runner
//!
//! Pipes are drained on helper threads while the calling thread polls the
//! child, so a raised [`CancelFlag`] can kill a compilation that is stuck
//! instantiating templates.

use std::io::{Read, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace};

use crate::backends::{BackendError, CancelFlag};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// What a finished compiler run left behind
#[derive(Debug)]
pub struct CompilerOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `program` with `args`, feeding `stdin` to it when given
pub fn run_compiler(
    program: &str,
    args: &[String],
    stdin: Option<&str>,
    cancel: &CancelFlag,
) -> Result<CompilerOutput, BackendError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| BackendError::Spawn {
            program: program.to_string(),
            source,
        })?;
    debug!(program, ?args, pid = child.id(), "compiler started");

    let writer = match (child.stdin.take(), stdin) {
        (Some(mut pipe), Some(input)) => {
            let input = input.to_owned();
            // dropping the pipe at the end of the thread closes the child's stdin
            Some(thread::spawn(move || pipe.write_all(input.as_bytes())))
        }
        _ => None,
    };
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if cancel.is_raised() {
            debug!(pid = child.id(), "cancelling compiler");
            // the child may have exited in the meantime
            let _ = child.kill();
            let _ = child.wait();
            return Err(BackendError::Cancelled);
        }
        thread::sleep(POLL_INTERVAL);
    };
    // an interrupt also reaches the compiler, which may exit before we poll
    if cancel.is_raised() {
        return Err(BackendError::Cancelled);
    }

    if let Some(writer) = writer {
        // a compiler that stops reading early closes the pipe on us
        if let Ok(Err(err)) = writer.join() {
            trace!("compiler stdin closed early: {}", err);
        }
    }

    let output = CompilerOutput {
        status,
        stdout: collect(stdout),
        stderr: collect(stderr),
    };
    trace!(status = %output.status, stderr = %output.stderr, "compiler finished");
    Ok(output)
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
