// Command-line interface for deckdown
//
// This binary turns Markdown files into S5 slideshow HTML.
//
// The main role of the deckdown program is to interface with slideshow
// content: converting Markdown decks and inspecting their metadata. The core
// capabilities live in the deckdown-render crate; this is the shell around
// that library.
//
// Converting:
//
// Usage:
//  deckdown <input.md> [-o <file>]             - Convert to S5 HTML (default)
//  deckdown convert <input.md> [-o <file>]     - Same as above (explicit)
//  deckdown inspect <input.md>                 - Print metadata + slide count as JSON
//
// Rendering knobs come from the layered configuration (embedded defaults,
// then an optional ./deckdown.toml, then --config <path>) and can be flipped
// per invocation with --toc, --smart and --html-tags.

use clap::{Arg, ArgAction, Command, ValueHint};
use deckdown_config::{DeckConfig, Loader};
use deckdown_render::{parse_metadata, render_slideshow, slide_count, S5Options};
use std::fs;

fn build_cli() -> Command {
    Command::new("deckdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting Markdown files into S5 slideshows")
        .long_about(
            "deckdown is a command-line tool for building S5 slideshow HTML\n\
            from Markdown documents.\n\n\
            Commands:\n  \
            - convert: Render a Markdown deck to a single S5 HTML file\n  \
            - inspect: Show frontmatter metadata and the slide count\n\n\
            Slides are delimited by level-1 headings and by horizontal rules\n\
            (---). Frontmatter title/author/date feed the title slide.\n\n\
            Examples:\n  \
            deckdown talk.md                    # Render to stdout\n  \
            deckdown talk.md -o talk.html       # Render to a file\n  \
            deckdown talk.md --toc              # Add id=\"toc_N\" heading anchors\n  \
            deckdown inspect talk.md            # Metadata + slide count as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Render a Markdown document to a single S5 slideshow file.\n\n\
                    The output expects the standard S5 ui/ directory (slides.css,\n\
                    slides.js, ...) next to it.\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    deckdown convert talk.md                 # Render to stdout\n  \
                    deckdown convert talk.md -o talk.html    # Render to a file\n  \
                    deckdown talk.md -o talk.html            # 'convert' is optional",
                )
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
                        .help("Smart punctuation (quotes, dashes, ellipses)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("html-tags")
                        .long("html-tags")
                        .help("Close void tags HTML-style (\">\") instead of XHTML (\"/>\")")
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

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert".
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check whether the first free arg looks like a file rather than
            // a subcommand, and retry with "convert" injected.
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "inspect"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            let mut options: S5Options = (&config.render).into();
            if sub_matches.get_flag("toc") {
                options.toc = true;
            }
            if sub_matches.get_flag("smart") {
                options.smart = true;
            }
            if sub_matches.get_flag("html-tags") {
                options.xhtml = false;
            }

            handle_convert_command(input, output, &options);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_inspect_command(path);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, options: &S5Options) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let html = render_slideshow(&source, options).unwrap_or_else(|e| {
        eprintln!("Render error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{html}");
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let meta = parse_metadata(&source).unwrap_or_default();
    let report = serde_json::json!({
        "title": meta.title,
        "author": meta.author,
        "date": meta.date,
        "slides": slide_count(&source),
    });

    println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
}

fn load_cli_config(explicit_path: Option<&str>) -> DeckConfig {
    let loader = Loader::new().with_optional_file("deckdown.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
