//! tmplsh - CLI

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::tty::IsTty;
use tmplsh::backends::ClangBackend;
use tmplsh::repl::{spawn_interrupt_listener, ReadlineShell, StreamShell};
use tmplsh::shell::Shell;
use tmplsh::util::config::{load_config_from, load_user_config, Config};
use tmplsh::util::logger::{self, LogLevel};
use tmplsh::{Context, Result, VERSION};

/// Interactive shell for C++ template metaprogramming
#[derive(Parser, Debug)]
#[command(name = "tmplsh")]
#[command(version = VERSION)]
#[command(about, long_about = None)]
struct Args {
    /// Add a directory to the include path
    #[arg(short = 'I', value_name = "DIR")]
    include: Vec<PathBuf>,

    /// Define a macro
    #[arg(short = 'D', value_name = "NAME[=VALUE]")]
    define: Vec<String>,

    /// Language standard, e.g. c++11
    #[arg(long = "std", value_name = "STANDARD")]
    standard: Option<String>,

    /// Compiler executable
    #[arg(long, value_name = "PROGRAM")]
    compiler: Option<String>,

    /// Disable syntax highlighting
    #[arg(long)]
    no_highlight: bool,

    /// Show compiler command lines
    #[arg(short, long)]
    verbose: bool,

    /// History file
    #[arg(long, value_name = "FILE")]
    history_file: Option<PathBuf>,

    /// Use vi key bindings
    #[arg(long)]
    vi: bool,

    /// Read lines from stdin without line editing
    #[arg(long)]
    batch: bool,

    /// Configuration file to use instead of the user one
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

impl Args {
    /// Command line values win over the configuration file
    fn apply(
        &self,
        config: &mut Config,
    ) {
        config.verbose |= self.verbose;
        config.compiler.include_paths.extend(self.include.iter().cloned());
        config.compiler.macros.extend(self.define.iter().cloned());
        if let Some(standard) = &self.standard {
            config.compiler.standard = standard.clone();
        }
        if let Some(compiler) = &self.compiler {
            config.compiler.program = compiler.clone();
        }
        if self.no_highlight {
            config.repl.syntax_highlight = false;
        }
        if let Some(path) = &self.history_file {
            config.repl.history_file = Some(path.clone());
        }
        config.repl.vi_mode |= self.vi;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_with_level(args.log_level);

    let mut config = match &args.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => load_user_config().context("Failed to load user config")?,
    };
    args.apply(&mut config);

    let shell = Shell::new(ClangBackend::new(), config);

    if args.batch || !io::stdin().is_tty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = StreamShell::new(shell, stdin.lock(), stdout.lock());
        session.run().context("Failed to process input")?;
    } else {
        let mut session = ReadlineShell::new(shell).context("Failed to start line editor")?;
        spawn_interrupt_listener(session.cancel_flag())
            .context("Failed to install Ctrl-C handler")?;
        session.run().context("Line editor failed")?;
    }

    Ok(())
}
