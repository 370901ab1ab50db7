use std::io::Write;
use std::path::{Path, PathBuf};

use clex::toolchain::diagnostics::diagnostic_emitter::console_diagnostic_consumer;
use clex::toolchain::diagnostics::{DiagnosticConsumer, NullDiagnosticConsumer};
use clex::toolchain::lexer::{LexError, LexerOptions, NegativeLiterals, TokenizedBuffer};
use clex::toolchain::source::{SourceBuffer, SourceError};

const HELP: &str = const_format::formatcp!(
    "\
clex {} - a lexer for C-like source text

USAGE:
    clex [--phase PHASE] [--negative-literals POLICY] [--quiet] FILENAME

OPTIONS:
    --phase PHASE               Which output to produce. PHASE is one of 'lex', which prints each
                                lexeme on its own line, or 'kinds', which prints each token with
                                its position and kind. Defaults to 'lex'.
    --negative-literals POLICY  How a '-' directly followed by a digit is read. POLICY is one of
                                'legacy', which always reads a negative number, or
                                'after-operator', which reads a binary minus after an operand.
                                Defaults to 'legacy'.
    --quiet                     If present, all non-error output is suppressed.

ARGS:
    FILENAME                    The path to the source file to lex, or supply '-' to take input
                                from stdin.
",
    env!("CARGO_PKG_VERSION")
);

#[derive(Debug, Eq, PartialEq)]
enum OutputPhase {
    Lex,
    Kinds,
}

#[derive(Debug, Eq, PartialEq)]
struct ClexArgs {
    phase: OutputPhase,
    negative_literals: NegativeLiterals,
    quiet: bool,
    source_file: PathBuf,
}

#[derive(Debug, thiserror::Error)]
enum ClexError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn main() {
    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let result = if args.quiet {
        run(&args, &mut NullDiagnosticConsumer {})
    } else {
        run(&args, &mut console_diagnostic_consumer())
    };
    if let Err(e) = result {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn run(args: &ClexArgs, diags: &mut impl DiagnosticConsumer) -> Result<(), ClexError> {
    let source = open_source(&args.source_file)?;
    let options = LexerOptions::default().with_negative_literals(args.negative_literals);
    let tokens = TokenizedBuffer::tokenize_with_options(&source, options, diags);
    diags.flush();
    let tokens = tokens?;

    if args.quiet {
        return Ok(());
    }
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    match args.phase {
        OutputPhase::Lex => tokens.write_lexemes(&mut out)?,
        OutputPhase::Kinds => tokens.write_tokens(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn open_source(path: &Path) -> Result<SourceBuffer<'static>, SourceError> {
    if path.as_os_str() == "-" {
        SourceBuffer::new_from_reader(std::io::stdin().lock(), "<stdin>")
    } else {
        SourceBuffer::new_from_file(path)
    }
}

fn parse_args() -> Result<ClexArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = ClexArgs {
        phase: pargs.opt_value_from_fn("--phase", parse_phase)?.unwrap_or(OutputPhase::Lex),
        negative_literals: pargs.opt_value_from_str("--negative-literals")?.unwrap_or_default(),
        quiet: pargs.contains("--quiet"),
        source_file: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(args)
}

fn parse_phase(s: &str) -> Result<OutputPhase, &'static str> {
    match s {
        "lex" => Ok(OutputPhase::Lex),
        "kinds" => Ok(OutputPhase::Kinds),
        _ => Err("unrecognized output phase"),
    }
}
