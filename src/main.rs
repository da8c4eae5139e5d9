use std::{
    fs,
    io::{self, BufRead},
};

use attrcalc::{
    ReportOptions, Session,
    interpreter::grammar::format_grammar,
    render_report,
    util::num::format_real,
};
use clap::Parser;
use tracing::Level;

/// attrcalc evaluates arithmetic expressions with variable assignment and shows
/// every phase of the translation: tokens, syntax tree, synthesized values and
/// the symbol table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells attrcalc to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode only prints the value of the last statement that evaluated
    /// successfully.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Print the grammar's productions with their FIRST and FOLLOW sets, then
    /// exit.
    #[arg(short, long)]
    grammar: bool,

    /// Leave the token listing out of the report.
    #[arg(long)]
    no_tokens: bool,

    /// Leave the syntax tree out of the report.
    #[arg(long)]
    no_tree: bool,

    /// Leave the decorated syntax tree out of the report.
    #[arg(long)]
    no_decorated: bool,

    /// Leave the symbol table out of the report.
    #[arg(long)]
    no_table: bool,

    /// Log more on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The script, or a path with `--file`. Read from stdin until the first
    /// empty line when omitted.
    contents: Option<String>,
}

impl Args {
    fn report_options(&self) -> ReportOptions {
        ReportOptions { tokens:    !self.no_tokens,
                        tree:      !self.no_tree,
                        results:   true,
                        decorated: !self.no_decorated,
                        table:     !self.no_table, }
    }

    const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Collects lines from stdin until the first blank one.
fn read_stdin() -> io::Result<String> {
    eprintln!("Enter expressions (an empty line ends the input):");
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(args.log_level())
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    if args.grammar {
        print!("{}", format_grammar());
        return;
    }

    let script = match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path).unwrap_or_else(|_| {
                                                          eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                                          std::process::exit(1);
                                                      }),
        (Some(script), false) => script.clone(),
        (None, _) => read_stdin().unwrap_or_else(|e| {
                                     eprintln!("Failed to read from stdin: {e}");
                                     std::process::exit(1);
                                 }),
    };

    if script.trim().is_empty() {
        eprintln!("No code was entered.");
        return;
    }

    let mut session = Session::new();
    match session.run(&script) {
        Ok(run) => {
            if args.pipe_mode {
                if let Some(value) = run.last_value() {
                    println!("{}", format_real(value));
                }
            } else {
                print!("{}", render_report(&run, session.table(), &args.report_options()));
            }
            if run.has_errors() {
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
