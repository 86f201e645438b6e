//! Ctrl-C handling while a backend call runs
//!
//! The line editor sees Ctrl-C as a key while it is reading. Between two
//! prompts the terminal delivers SIGINT instead, which this listener turns
//! into a raised [`CancelFlag`].

use std::io;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::backends::CancelFlag;

/// Start a listener thread raising `flag` on every Ctrl-C
///
/// Installing it replaces the default "terminate" action of SIGINT for the
/// whole process.
pub fn spawn_interrupt_listener(flag: CancelFlag) -> io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("tmplsh-interrupt".to_string())
        .spawn(move || {
            runtime.block_on(async move {
                loop {
                    match tokio::signal::ctrl_c().await {
                        Ok(()) => {
                            debug!("interrupt received");
                            flag.raise();
                        }
                        Err(err) => {
                            warn!("cannot listen for Ctrl-C: {}", err);
                            break;
                        }
                    }
                }
            })
        })
}
