use std::io;
use std::path::PathBuf;
use std::process;
use std::thread;

use clap::Parser;
use is_terminal::IsTerminal;
use signal_hook::consts::SIGINT;
use signal_hook::iterator::Signals;

use prettyjson::{
    collect_input, parse, resolve_filename, write_with_confirmation, FormatOptions, Formatter,
    PrettyJsonError, WriteOutcome,
};

/// Interactive JSON validator and pretty-printer.
///
/// pjson reads JSON pasted into the terminal (or piped through stdin),
/// validates it, and writes the formatted result to a file. Input ends at an
/// 'end' line, at a blank line once some content has been entered, or at end
/// of input.
#[derive(Parser, Debug)]
#[command(name = "pjson")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of spaces per indentation level.
    #[arg(short, long, default_value = "4")]
    indent: usize,

    /// Output file. If not specified, a timestamp-based name is used.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Sort object keys alphabetically.
    #[arg(short, long)]
    sort_keys: bool,

    /// Minify output (remove all whitespace).
    #[arg(short, long)]
    compact: bool,

    /// Print the formatted result before writing it.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    watch_for_interrupt();

    if let Err(e) = run(args) {
        eprintln!("pjson: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("Paste your JSON data (press Enter twice to finish):");
        println!("(Or type 'end' on a line of its own.)\n");
    }

    let input = collect_input(stdin.lock())?;
    if input.is_empty() {
        println!("No input received.");
        return Ok(());
    }

    let value = match parse(&input) {
        Ok(value) => value,
        Err(err) => {
            report_parse_failure(&err);
            process::exit(1);
        }
    };

    let mut formatter = Formatter::new();
    configure_options(&mut formatter.options, &args);
    let formatted = formatter.format(&value)?;

    if args.verbose {
        println!("\nFormatted JSON:");
        println!("{}", formatted);
    }

    let filename = resolve_filename(args.output.as_deref());
    let outcome =
        write_with_confirmation(&filename, &formatted, &mut stdin.lock(), &mut io::stdout())
            .map_err(|e| format!("cannot write '{}': {}", filename.display(), e))?;

    match outcome {
        WriteOutcome::Written(path) => println!("\nJSON successfully saved to: {}", path.display()),
        WriteOutcome::Declined => println!("Operation cancelled."),
    }

    Ok(())
}

fn configure_options(opts: &mut FormatOptions, args: &Args) {
    opts.indent = args.indent;
    opts.sort_keys = args.sort_keys;
    opts.compact = args.compact;
}

fn report_parse_failure(err: &PrettyJsonError) {
    eprintln!("pjson: {}", err);
    if let Some(snippet) = &err.snippet {
        eprintln!("Problematic text: {}", snippet);
    }
    if err.position.is_some() {
        eprintln!("Common fixes:");
        eprintln!("- Check for missing commas or brackets");
        eprintln!("- Remove trailing commas");
        eprintln!("- Ensure only one JSON value exists");
    }
}

/// Reports Ctrl-C with a dedicated diagnostic instead of dying silently,
/// whichever blocking phase it lands in.
fn watch_for_interrupt() {
    if let Ok(mut signals) = Signals::new([SIGINT]) {
        thread::spawn(move || {
            if signals.forever().next().is_some() {
                eprintln!("\npjson: interrupted");
                process::exit(1);
            }
        });
    }
}
