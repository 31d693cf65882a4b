//! Build automation tasks for XAES-256-GCM
//!
//! Run with: cargo xtask <command>

use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "XAES-256-GCM build automation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all tests
    Test {
        /// Also run the one-million-iteration accumulated vector
        #[arg(long)]
        slow: bool,
    },

    /// Run clippy lints
    Lint,

    /// Check formatting
    Fmt,

    /// Run all CI checks
    Ci,

    /// Run criterion benchmarks
    Bench,

    /// Run a fuzz target (requires cargo-fuzz and a nightly toolchain)
    Fuzz {
        /// Target name, e.g. fuzz_open_manual
        target: String,

        /// Maximum run time in seconds
        #[arg(long, default_value_t = 60)]
        seconds: u64,
    },

    /// Generate documentation
    Doc,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test { slow } => {
            run_command("cargo", &["test", "--all-features", "--workspace"])?;
            if slow {
                run_command(
                    "cargo",
                    &[
                        "test",
                        "-p",
                        "xaes-256-gcm",
                        "--release",
                        "--test",
                        "vectors",
                        "--",
                        "--ignored",
                    ],
                )?;
            }
        }
        Commands::Lint => {
            run_command("cargo", &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
        }
        Commands::Fmt => {
            run_command("cargo", &["fmt", "--all", "--check"])?;
        }
        Commands::Ci => {
            println!("Running CI checks...");
            run_command("cargo", &["fmt", "--all", "--check"])?;
            run_command("cargo", &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
            run_command("cargo", &["test", "--all-features", "--workspace"])?;
            println!("All CI checks passed!");
        }
        Commands::Bench => {
            run_command("cargo", &["bench", "-p", "xaes-256-gcm"])?;
        }
        Commands::Fuzz { target, seconds } => {
            let max_time = format!("-max_total_time={seconds}");
            run_command_in(
                "fuzz",
                "cargo",
                &["+nightly", "fuzz", "run", &target, "--", &max_time],
            )?;
        }
        Commands::Doc => {
            run_command("cargo", &["doc", "--workspace", "--no-deps", "--open"])?;
        }
    }

    Ok(())
}

fn run_command(program: &str, args: &[&str]) -> anyhow::Result<()> {
    run_command_in(".", program, args)
}

fn run_command_in(dir: &str, program: &str, args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new(program).args(args).current_dir(dir).status()?;

    if !status.success() {
        anyhow::bail!("{} {:?} failed", program, args);
    }

    Ok(())
}
