//! REPL (Read-Eval-Print Loop) for editing the form

use super::command::{FormCommand, HELP, parse_line};
use super::view::FormView;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use planner_application::{Action, ActionOutcome, GenerateProgress, NoProgress, PlannerSession};
use planner_domain::CoupleKind;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::debug;

/// Interactive form editor
pub struct FormRepl {
    session: PlannerSession,
    formatter: Box<dyn OutputFormatter>,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl FormRepl {
    /// Create a new FormRepl
    pub fn new(session: PlannerSession, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            session,
            formatter,
            show_progress: true,
            history_path: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set where line history is kept
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("planner> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if self.handle_line(line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Dinner Planner - Form Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        self.print_form();
        println!("Type 'help' for available commands");
        println!();
    }

    fn print_form(&self) {
        println!(
            "{}",
            FormView::render(
                self.session.roster(),
                self.session.selectors(),
                &self.session.compute().status()
            )
        );
    }

    /// Handle one line of input. Returns true if should exit.
    async fn handle_line(&mut self, line: &str) -> bool {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return false,
            Err(e) => {
                println!("{}", e.to_string().red());
                return false;
            }
        };
        debug!("REPL command: {:?}", command);

        match command {
            FormCommand::Edit(action) => self.edit(action),
            FormCommand::Generate => self.generate().await,
            FormCommand::Show => self.print_form(),
            FormCommand::Output => match self.session.output() {
                Some(output) => println!("{}", self.formatter.format(output)),
                None => println!("{}", "(no output yet)".dimmed()),
            },
            FormCommand::Status => {
                println!("{} {}", "Solver:".bold(), self.session.compute().status())
            }
            FormCommand::Help => {
                println!();
                println!("{}", HELP);
                println!();
            }
            FormCommand::Quit => {
                println!("Bye!");
                return true;
            }
        }
        false
    }

    fn edit(&mut self, action: Action) {
        match self.session.dispatch(action) {
            Ok(outcome) => println!("{}", Self::describe(&outcome).green()),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    fn describe(outcome: &ActionOutcome) -> String {
        match outcome {
            ActionOutcome::CoupleAdded(id) => format!("Added couple {}", id),
            ActionOutcome::CoupleRemoved(CoupleKind::Hosting) => {
                "Removed hosting couple".to_string()
            }
            ActionOutcome::CoupleRemoved(CoupleKind::NonHosting) => {
                "Removed non-hosting couple".to_string()
            }
            ActionOutcome::CoupleRenamed => "Renamed".to_string(),
            ActionOutcome::CourseToggled { course, forbidden } => {
                if *forbidden {
                    format!("May no longer host {}", course)
                } else {
                    format!("May host {} again", course)
                }
            }
            ActionOutcome::PairAdded(id) => format!("Added forbidden pair {}", id),
            ActionOutcome::PairRemoved => "Removed forbidden pair".to_string(),
            ActionOutcome::SelectorChanged => "Selection changed".to_string(),
            ActionOutcome::Saved => "Saved".to_string(),
        }
    }

    async fn generate(&mut self) {
        let progress: Box<dyn GenerateProgress> = if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        };

        match self.session.generate(progress.as_ref()).await {
            Ok(output) => println!("{}", self.formatter.format(output)),
            Err(e) if e.is_compute_failure() => {
                eprintln!("{} {}", "Cannot generate:".red().bold(), e);
                println!("Check the solver with 'status'.");
            }
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }
}
