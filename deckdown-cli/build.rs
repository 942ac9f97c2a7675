use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules.
fn completion_cli() -> Command {
    Command::new("deckdown")
        .about("A tool for converting Markdown files into S5 slideshows")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a deckdown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a Markdown deck to S5 HTML (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("toc")
                        .long("toc")
                        .help("Emit id=\"toc_N\" anchors on headings")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("smart")
                        .long("smart")
                        .help("Smart punctuation")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("html-tags")
                        .long("html-tags")
                        .help("Close void tags HTML-style")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print deck metadata and slide count as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "deckdown", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "deckdown", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "deckdown", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
