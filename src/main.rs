use std::{fs::read_to_string, io, path::PathBuf, process::ExitCode, time::Instant};

use assign_parser::{
    ast::ast::Node,
    errors::errors::Error,
    format_error,
    lexer::{
        lexer::{tokenize, LexMode, Scanner},
        tokens::Token,
    },
    parser::parser::parse,
};
use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EXAMPLE_SOURCE: &str = "x := 5 + y * (z - 3); y := 'a';";

/// Parses `identifier := expression` statements and prints their syntax trees.
#[derive(Parser, Debug)]
#[command(name = "assign_parser", version)]
struct Cli {
    /// File to read statements from
    file: Option<PathBuf>,

    /// Inline source, takes precedence over FILE
    #[arg(short = 'e', long = "source")]
    source: Option<String>,

    /// Fail on characters that are not part of any token instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn mode(&self) -> LexMode {
        if self.strict {
            LexMode::Strict
        } else {
            LexMode::Skip
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = match load_source(&cli) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(&source, cli.mode()) {
        Ok(tokens) => tokens,
        Err(err) => return report(&err),
    };
    info!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        print!("{}", render_tokens(&tokens));
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    match parse(Scanner::from_tokens(tokens)) {
        Ok(statements) => {
            info!("Parsed in {:?}", parse_start.elapsed());
            print!("{}", render_statements(&statements));
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

/// Inline source first, then FILE, then the built-in example.
fn load_source(cli: &Cli) -> io::Result<String> {
    match (&cli.source, &cli.file) {
        (Some(source), _) => Ok(source.clone()),
        (None, Some(file)) => read_to_string(file).map_err(|err| {
            io::Error::new(err.kind(), format!("{}: {}", file.display(), err))
        }),
        (None, None) => Ok(String::from(EXAMPLE_SOURCE)),
    }
}

/// One token value per line.
fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

/// Each tree followed by a blank line.
fn render_statements(statements: &[Node]) -> String {
    statements
        .iter()
        .map(|statement| format!("{}\n", statement))
        .collect()
}

fn report(err: &Error) -> ExitCode {
    eprintln!("{}", format_error(err));
    ExitCode::FAILURE
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "assign_parser=info",
        1 => "assign_parser=debug",
        _ => "assign_parser=trace",
    }
}
