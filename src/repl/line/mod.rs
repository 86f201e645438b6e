//! Line-based REPL with rustyline
//!
//! Interactive front end: line editing, persistent history, completion
//! through the session and coloured output.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use owo_colors::OwoColorize;
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{CompletionType, EditMode, Editor};
use tracing::{debug, warn};

use crate::backends::{Backend, CancelFlag};
use crate::repl::highlight::highlight_cpp;
use crate::shell::{Console, Shell};
use crate::util::config::default_history_path;

mod helper;
pub use helper::ShellHelper;

type LineEditor<B> = Editor<ShellHelper<B>, FileHistory>;

/// Console printing to the terminal and recording into the editor history
struct EditorConsole<'a, B: Backend> {
    editor: &'a mut LineEditor<B>,
    highlight: bool,
}

impl<B: Backend> Console for EditorConsole<'_, B> {
    fn display_normal(
        &mut self,
        text: &str,
    ) {
        if self.highlight {
            println!("{}", highlight_cpp(text));
        } else {
            println!("{}", text);
        }
    }

    fn display_info(
        &mut self,
        text: &str,
    ) {
        println!("{}", text);
    }

    fn display_error(
        &mut self,
        text: &str,
    ) {
        if self.highlight {
            println!("{}", text.bright_red());
        } else {
            println!("{}", text);
        }
    }

    fn add_history(
        &mut self,
        line: &str,
    ) {
        if let Err(err) = self.editor.add_history_entry(line) {
            warn!("cannot record history: {}", err);
        }
    }

    fn width(&self) -> usize {
        crossterm::terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(80)
    }
}

/// Interactive shell on top of a rustyline editor
pub struct ReadlineShell<B: Backend> {
    shell: Rc<RefCell<Shell<B>>>,
    editor: LineEditor<B>,
    history_file: Option<PathBuf>,
    highlight: bool,
}

impl<B: Backend> ReadlineShell<B> {
    pub fn new(shell: Shell<B>) -> Result<Self, ReadlineError> {
        let repl = shell.config().repl.clone();
        let editor_config = EditorConfig::builder()
            .max_history_size(repl.history_size)?
            .auto_add_history(false)
            .completion_type(CompletionType::List)
            .edit_mode(if repl.vi_mode {
                EditMode::Vi
            } else {
                EditMode::Emacs
            })
            .build();

        let shell = Rc::new(RefCell::new(shell));
        let mut editor = LineEditor::with_config(editor_config)?;
        editor.set_helper(Some(ShellHelper::new(
            Rc::clone(&shell),
            repl.syntax_highlight,
        )));

        // Load history if file exists
        let history_file = repl.history_file.or_else(default_history_path);
        if let Some(path) = &history_file {
            if path.exists() {
                if let Err(err) = editor.load_history(path) {
                    warn!("cannot load history from {}: {}", path.display(), err);
                }
            }
        }

        Ok(Self {
            shell,
            editor,
            history_file,
            highlight: repl.syntax_highlight,
        })
    }

    /// Flag raised by Ctrl-C while a backend call runs
    pub fn cancel_flag(&self) -> CancelFlag {
        self.shell.borrow().cancel_flag()
    }

    /// Show the splash screen, then read lines until Ctrl-D
    pub fn run(&mut self) -> Result<(), ReadlineError> {
        let prompt = {
            let shell = self.shell.borrow();
            let mut console = EditorConsole {
                editor: &mut self.editor,
                highlight: self.highlight,
            };
            shell.display_splash(&mut console);
            shell.prompt().to_string()
        };

        let outcome = loop {
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let mut console = EditorConsole {
                        editor: &mut self.editor,
                        highlight: self.highlight,
                    };
                    self.shell.borrow_mut().line_available(&line, &mut console);
                }
                // Ctrl-C at the prompt drops the line being edited
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        self.save_history();
        outcome
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_file {
            if let Some(dir) = path.parent() {
                if let Err(err) = std::fs::create_dir_all(dir) {
                    warn!("cannot create {}: {}", dir.display(), err);
                    return;
                }
            }
            match self.editor.save_history(path) {
                Ok(()) => debug!("history saved to {}", path.display()),
                Err(err) => warn!("cannot save history to {}: {}", path.display(), err),
            }
        }
    }
}
