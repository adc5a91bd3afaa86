use std::{fs, process};

use clap::Parser;
use gsc::{
    error::ProgramError,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse_program},
};
use rustyline::error::ReadlineError;

/// gsc is a tree-walking interpreter for the GSC scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the parsed syntax tree to stderr before executing.
    #[arg(short, long)]
    ast: bool,

    /// Script file to run. Starts an interactive prompt when omitted.
    script: Option<String>,
}

fn main() {
    let args = Args::parse();

    match &args.script {
        Some(path) => run_file(path, args.ast),
        None => run_prompt(args.ast),
    }
}

/// Runs a script file to completion, exiting nonzero on any error.
fn run_file(path: &str, show_ast: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                     process::exit(1);
                 });

    let mut interpreter = Interpreter::new();

    if let Err(error) = run_source(&source, &mut interpreter, show_ast) {
        eprintln!("{error}");
        process::exit(1);
    }
}

/// Reads and executes lines interactively.
///
/// One interpreter lives for the whole session, so variables declared on
/// earlier lines stay visible. Errors are reported and the prompt
/// continues; only end-of-file or an interrupt ends the session.
fn run_prompt(show_ast: bool) {
    let mut editor = rustyline::DefaultEditor::new().expect("failed to start readline impl");
    let mut interpreter = Interpreter::new();

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.trim());

                if let Err(error) = run_source(&line, &mut interpreter, show_ast) {
                    eprintln!("{error}");
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error:?}");
                break;
            },
        }
    }
}

/// Drives the pipeline for one source text: scan, parse, then execute.
///
/// Lexical and parse errors are batched into one report and nothing runs
/// when any were found. The optional AST dump goes to stderr so it never
/// mixes with program output.
fn run_source(source: &str,
              interpreter: &mut Interpreter,
              show_ast: bool)
              -> Result<(), ProgramError> {
    let (tokens, lex_errors) = scan(source);
    let (statements, parse_errors) = parse_program(&mut tokens.iter().peekable());

    if !lex_errors.is_empty() || !parse_errors.is_empty() {
        return Err(ProgramError::Invalid { lex:   lex_errors,
                                           parse: parse_errors, });
    }

    if show_ast {
        for statement in &statements {
            eprintln!("{statement}");
        }
    }

    interpreter.interpret(&statements).map_err(ProgramError::Runtime)
}
