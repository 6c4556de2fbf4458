use std::io::{self, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use clap_stdin::MaybeStdin;
use log::{info, warn, LevelFilter};

use exprcc::{parser::DEFAULT_MAX_DEPTH, CompileOptions, CompileResult};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Emit {
    Asm,
    Tokens,
    Ast,
}

/// Compile an arithmetic expression into x86-64 assembly.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Expression to compile, or `-` to read it from stdin
    #[arg(allow_hyphen_values = true)]
    expr: MaybeStdin<String>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Emit::Asm)]
    emit: Emit,

    /// Deepest parenthesis nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn run(user_input: &str, emit: Emit, options: &CompileOptions) -> CompileResult<String> {
    match emit {
        Emit::Asm => exprcc::compile(user_input, options),
        Emit::Tokens => Ok(exprcc::tokenize(user_input)?
            .iter()
            .map(|t| format!("{t}\n"))
            .collect()),
        Emit::Ast => Ok(format!("{}\n", exprcc::parse(user_input, options)?)),
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };
    init_logger(args.verbose);

    let user_input = args.expr.trim_end_matches(['\r', '\n']);
    info!("compiling {user_input:?}");

    let options = CompileOptions {
        max_depth: args.max_depth,
    };
    match run(user_input, args.emit, &options) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            match stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    warn!("failed to write output: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            eprintln!("{}", err.diagnostic(user_input));
            ExitCode::FAILURE
        }
    }
}
