use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Value, json};

use folparse::{Expr, ParseError, hint_for_code, parse_many};

#[derive(Debug, Parser)]
#[command(name = "folparse")]
#[command(about = "Parser for first-order logic / Peano arithmetic expressions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse expressions and print their canonical fully-parenthesized form.
    Parse {
        /// Input files, each holding comma-separated expressions.
        files: Vec<PathBuf>,
        /// Parse this text instead of (or in addition to) files.
        #[arg(long)]
        expr: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

struct IoFailure {
    source: String,
    message: String,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match cli.command {
        Command::Parse {
            files,
            expr,
            format,
        } => run_parse(&files, expr.as_deref(), format),
    };
    std::process::exit(exit_code);
}

fn run_parse(files: &[PathBuf], expr: Option<&str>, format: OutputFormat) -> i32 {
    let mut inputs: Vec<(String, String)> = Vec::new();
    let mut io_failures: Vec<IoFailure> = Vec::new();

    if let Some(text) = expr {
        inputs.push(("<expr>".to_string(), text.to_string()));
    }
    for file in files {
        match fs::read_to_string(file) {
            Ok(text) => inputs.push((file.display().to_string(), text)),
            Err(err) => io_failures.push(IoFailure {
                source: file.display().to_string(),
                message: format!("failed to read: {err}"),
            }),
        }
    }
    if inputs.is_empty() && io_failures.is_empty() {
        eprintln!("E-IO: no input: pass files or --expr");
        return 2;
    }

    let mut parsed: Vec<(String, Vec<Expr>)> = Vec::new();
    let mut parse_failures: Vec<(String, ParseError)> = Vec::new();
    for (source, text) in &inputs {
        match parse_many(text) {
            Ok(expressions) => parsed.push((source.clone(), expressions)),
            Err(err) => parse_failures.push((source.clone(), err)),
        }
    }

    match format {
        OutputFormat::Text => run_text(&parsed, &parse_failures, &io_failures),
        OutputFormat::Json => run_json(&parsed, &parse_failures, &io_failures),
    }
}

fn run_text(
    parsed: &[(String, Vec<Expr>)],
    parse_failures: &[(String, ParseError)],
    io_failures: &[IoFailure],
) -> i32 {
    for failure in io_failures {
        match hint_for_code("E-IO") {
            Some(hint) => eprintln!(
                "{}: E-IO: {} (hint: {hint})",
                failure.source, failure.message
            ),
            None => eprintln!("{}: E-IO: {}", failure.source, failure.message),
        }
    }
    for (source, err) in parse_failures {
        match err.hint() {
            Some(hint) => eprintln!("{source}: {err} (hint: {hint})"),
            None => eprintln!("{source}: {err}"),
        }
    }
    for (_, expressions) in parsed {
        for expr in expressions {
            println!("{expr}");
        }
    }
    if parse_failures.is_empty() && io_failures.is_empty() {
        0
    } else {
        1
    }
}

fn run_json(
    parsed: &[(String, Vec<Expr>)],
    parse_failures: &[(String, ParseError)],
    io_failures: &[IoFailure],
) -> i32 {
    let mut diagnostics: Vec<Value> = Vec::new();
    for failure in io_failures {
        diagnostics.push(json!({
            "code": "E-IO",
            "message": failure.message,
            "hint": hint_for_code("E-IO"),
            "source": failure.source,
        }));
    }
    for (source, err) in parse_failures {
        diagnostics.push(json!({
            "code": err.code(),
            "message": err.to_string(),
            "hint": err.hint(),
            "start": err.span().start,
            "end": err.span().end,
            "source": source,
        }));
    }

    let value = if diagnostics.is_empty() {
        let expressions: Vec<Value> = parsed
            .iter()
            .flat_map(|(source, expressions)| {
                expressions.iter().map(move |expr| {
                    json!({
                        "source": source,
                        "text": expr.to_string(),
                        "ast": expr,
                    })
                })
            })
            .collect();
        json!({ "status": "ok", "expressions": expressions })
    } else {
        json!({ "status": "error", "diagnostics": diagnostics })
    };

    println!("{value}");
    if diagnostics.is_empty() { 0 } else { 1 }
}
