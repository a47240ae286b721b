use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for portalworld")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, deny, doc, world validation
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Run cargo deny check
    Deny,
    /// Build rustdoc for the workspace
    Doc,
    /// Validate the built-in world registry through the CLI
    Worlds,
    /// Export the built-in worlds as JSON into a directory
    Export {
        #[arg(default_value = "target/worlds")]
        dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            fmt()?;
            clippy()?;
            test()?;
            deny()?;
            doc()?;
            worlds()?;
        }
        Commands::Fmt => fmt()?,
        Commands::Clippy => clippy()?,
        Commands::Test => test()?,
        Commands::Deny => deny()?,
        Commands::Doc => doc()?,
        Commands::Worlds => worlds()?,
        Commands::Export { dir } => cargo(
            "world export",
            &["run", "-q", "-p", "portalworld-cli", "--", "export", dir.as_str()],
        )?,
    }

    Ok(())
}

fn fmt() -> Result<()> {
    cargo("cargo fmt check", &["fmt", "--all", "--", "--check"])
}

fn clippy() -> Result<()> {
    cargo(
        "cargo clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )
}

fn test() -> Result<()> {
    cargo("cargo test", &["test", "--workspace"])
}

fn deny() -> Result<()> {
    cargo(
        "cargo deny check (licenses bans sources)",
        &["deny", "check", "licenses", "bans", "sources"],
    )
}

fn doc() -> Result<()> {
    cargo("cargo doc", &["doc", "--workspace", "--no-deps"])
}

fn worlds() -> Result<()> {
    cargo(
        "world validation",
        &["run", "-q", "-p", "portalworld-cli", "--", "validate"],
    )
}

fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> Running {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("{label} failed");
    }
    Ok(())
}
