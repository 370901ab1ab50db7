use std::{
    env,
    path::{Path, PathBuf},
};

use argh::FromArgs;

#[derive(FromArgs, PartialEq, Debug)]
/// Top-level command.
struct Args {
    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    ContinuousIntegration(CIArgs),
    Fuzz(FuzzArgs),
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run the continuous integration validation tests.
#[argh(subcommand, name = "ci")]
struct CIArgs {
    #[argh(switch)]
    /// attempt to automatically fix format and clippy errors.
    fix: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run a fuzz target for a bounded time. Requires cargo-fuzz and a nightly toolchain.
#[argh(subcommand, name = "fuzz")]
struct FuzzArgs {
    #[argh(positional, default = "String::from(\"tokenized_buffer\")")]
    /// the fuzz target to run, either `lex` or `tokenized_buffer`.
    target: String,

    #[argh(option, default = "60")]
    /// how many seconds to fuzz for.
    seconds: u32,
}

fn main() -> Result<(), DynError> {
    let args: Args = argh::from_env();
    match args.subcommand {
        SubCommand::ContinuousIntegration(ci_args) => {
            ci(ci_args.fix)?;
        }
        SubCommand::Fuzz(fuzz_args) => {
            fuzz(&fuzz_args.target, fuzz_args.seconds)?;
        }
    };

    Ok(())
}

type DynError = Box<dyn std::error::Error>;

fn ci(fix: bool) -> Result<(), DynError> {
    let cargo = cargo();
    if fix {
        println!("** automatically fixing code formatting with `cargo fmt --all`");
        duct::cmd!(&cargo, "fmt", "--all",).run()?;
    } else {
        println!("** checking code formatting with `cargo fmt --all -- --check`");
        duct::cmd!(&cargo, "fmt", "--all", "--", "--check",).run()?;
    }

    if fix {
        println!("** automatically fixing clippy issues with `cargo clippy --fix`");
        duct::cmd!(&cargo, "clippy", "--fix", "--all-targets").run()?;
    } else {
        println!("** linting code with `cargo clippy --all-targets -- --deny clippy::all`");
        duct::cmd!(&cargo, "clippy", "--all-targets", "--", "--deny", "clippy::all",).run()?;
    }

    println!("** building and testing code with `RUSTFLAGS=\"-D warnings\" cargo test`");
    duct::cmd!(&cargo, "test").env("RUSTFLAGS", "-D warnings").run()?;

    println!("** all checks passed!");
    Ok(())
}

fn fuzz(target: &str, seconds: u32) -> Result<(), DynError> {
    if target != "lex" && target != "tokenized_buffer" {
        return Err(format!("unknown fuzz target '{}'", target).into());
    }
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", seconds);

    println!("** fuzzing `{}` for {} seconds with `cargo +nightly fuzz run`", target, seconds);
    // The `+nightly` override needs the rustup proxy, not the toolchain's own cargo.
    duct::cmd!("cargo", "+nightly", "fuzz", "run", target, "--", max_time)
        .dir(fuzz_dir)
        .run()?;

    println!("** no crashes found.");
    Ok(())
}

fn project_root() -> Result<PathBuf, DynError> {
    match Path::new(&env!("CARGO_MANIFEST_DIR")).ancestors().nth(1) {
        Some(root) => Ok(root.to_path_buf()),
        None => Err("xtask is not inside a workspace".into()),
    }
}

fn cargo() -> String {
    env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}
