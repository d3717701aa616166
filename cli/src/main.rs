mod highlighter;
mod lexer;
mod prompt;
mod validator;

use bumpalo::Bump;
use clap::Parser;
use lispy::{Outcome, interpret, render_error};
use lispy_core::parser;
use miette::{IntoDiagnostic, Result};
use reedline::{
    EditCommand, Emacs, KeyCode, KeyModifiers, Keybindings, Reedline, ReedlineEvent, Signal,
    default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;

use crate::{highlighter::Highlighter, prompt::LispyPrompt, validator::BracketValidator};

const BANNER: &str = "\n---------------------------\n\
                      Welcome to KUBAScript\n\
                      Lispy Version 0.0.0.0.2\n\
                      Press Ctrl+c to exit\n";

/// Lispy - prefix integer arithmetic, one line at a time
#[derive(Parser, Debug)]
#[command(name = "lispy", version)]
#[command(about = "Evaluate Lispy expressions", long_about = None)]
struct Args {
    /// Print the syntax tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Expression to evaluate (if not provided, starts the REPL or reads stdin)
    expression: Option<String>,
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline() -> Reedline {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    // The default history is in memory only; nothing is written to disk.
    Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(BracketValidator))
        .with_edit_mode(edit_mode)
}

fn format_outcome(outcome: &Outcome) -> String {
    format!(
        "number of leaves: {}\nresult: {}",
        outcome.leaves, outcome.value
    )
}

fn print_syntax_tree(input: &str) {
    let arena = Bump::new();
    // Parse failures are reported by `interpret` right after.
    if let Ok(tree) = parser::parse(&arena, input) {
        println!("=== Syntax Tree ===");
        println!("{:#?}", tree);
        println!();
    }
}

fn interpret_input(input: &str, debug_parse: bool) {
    if input.trim().is_empty() {
        return;
    }

    if debug_parse {
        print_syntax_tree(input);
    }

    match interpret(input) {
        Ok(outcome) => println!("{}", format_outcome(&outcome)),
        Err(e) => render_error(&e),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        interpret_input(&expr, args.debug_parse);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let mut line_editor = setup_reedline();
        let prompt = LispyPrompt;

        println!("{}", BANNER);

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(buffer.as_ref(), args.debug_parse);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            tracing::debug!(line = %line, "read line");
            interpret_input(&line, args.debug_parse);
        }
    }

    Ok(())
}
