use std::{
    fs::File,
    io::{self, BufReader},
};

use clap::Parser;
use linecheck::checker::driver::run;
use tracing_subscriber::EnvFilter;

/// linecheck checks the syntax of a line-oriented script and reports the first
/// defect of every malformed line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linecheck to read the file named by `contents` instead of
    /// checking `contents` itself. `-` reads standard input.
    #[arg(short, long)]
    file: bool,

    /// Prints how many lines were accepted and rejected once the run is over.
    #[arg(short, long)]
    summary: bool,

    contents: String,
}

fn main() {
    // Verdicts go to stdout, diagnostics to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();

    let args = Args::parse();
    let stdout = io::stdout().lock();

    let result = match (args.file, args.contents.as_str()) {
        (false, source) => run(source.as_bytes(), stdout),
        (true, "-") => run(io::stdin().lock(), stdout),
        (true, path) => {
            let file = File::open(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run(BufReader::new(file), stdout)
        },
    };

    match result {
        Ok(summary) if args.summary => eprintln!("{summary}"),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
