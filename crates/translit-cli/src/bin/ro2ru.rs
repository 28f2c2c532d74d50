// ro2ru: transliterate Romanian text into Russian Cyrillic.
//
// Usage:
//   ro2ru [OPTIONS] [TEXT]...
//   echo "Bună ziua" | ro2ru
//
// Logging is controlled by the TRANSLIT_LOG environment variable
// (e.g. TRANSLIT_LOG=translit_ro=debug).

use std::io::{self, Write};
use std::process;

use clap::Parser;
use translit_cli::CliError;

#[derive(Parser)]
#[command(name = "ro2ru", about = "Transliterate Romanian text into Russian Cyrillic")]
struct Cli {
    /// Text to transliterate; read from stdin when omitted
    text: Vec<String>,

    /// Show every rule that changed each word
    #[arg(long)]
    explain: bool,

    /// Print the rule trace as JSON (implies --explain)
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    translit_cli::init_tracing();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = translit_cli::read_input(&cli.text, io::stdin().lock())?;
    tracing::debug!(len = input.len(), from_args = !cli.text.is_empty(), "input read");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.json {
        translit_cli::write_json(&mut out, &translit_ro::explain(&input))?;
    } else if cli.explain {
        translit_cli::write_explain(&mut out, &translit_ro::explain(&input))?;
    } else {
        writeln!(out, "{}", translit_ro::transliterate_to_russian(&input))
            .map_err(CliError::WriteOutput)?;
    }

    out.flush().map_err(CliError::WriteOutput)
}
