//! Front ends driving a [`Shell`](crate::shell::Shell)
//!
//! - `line`: interactive, rustyline-based
//! - `stream`: plain line streams (`--batch`, pipes)

pub mod highlight;
pub mod interrupt;
pub mod line;
pub mod stream;

pub use interrupt::spawn_interrupt_listener;
pub use line::ReadlineShell;
pub use stream::{StreamConsole, StreamShell};
