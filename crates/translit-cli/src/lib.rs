// translit-cli: shared utilities for the `ro2ru` tool.

use std::io::{self, Read, Write};

use translit_ro::WordTrace;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax).
pub const LOG_ENV: &str = "TRANSLIT_LOG";

/// Filter used when `TRANSLIT_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors surfaced by the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read stdin: {0}")]
    ReadInput(#[source] io::Error),

    #[error("failed to write output: {0}")]
    WriteOutput(#[source] io::Error),

    #[error("failed to encode trace as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Install a stderr log subscriber filtered by `TRANSLIT_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

/// Build the input text: the positional words joined by spaces, or the whole
/// of `stdin` when no words were given.
///
/// One trailing line ending (`\n` or `\r\n`) is dropped from stdin so the
/// last word reaches the word-final rules intact.
pub fn read_input(words: &[String], mut stdin: impl Read) -> Result<String, CliError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .map_err(CliError::ReadInput)?;
    Ok(strip_line_ending(input))
}

fn strip_line_ending(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

/// Write a human-readable stage trace, one block per word.
pub fn write_explain(out: &mut impl Write, traces: &[WordTrace]) -> Result<(), CliError> {
    for trace in traces.iter().filter(|t| !t.input.is_empty()) {
        writeln!(out, "{} -> {}", trace.input, trace.output).map_err(CliError::WriteOutput)?;
        for step in &trace.steps {
            let stage = format!("{:?}", step.stage);
            writeln!(
                out,
                "  {stage:10} {:28} {} -> {}",
                step.rule, step.before, step.after
            )
            .map_err(CliError::WriteOutput)?;
        }
    }
    Ok(())
}

/// Write the stage trace as pretty-printed JSON.
pub fn write_json(out: &mut impl Write, traces: &[WordTrace]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, traces)?;
    writeln!(out).map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_take_precedence_over_stdin() {
        let words = vec!["Bună".to_string(), "ziua".to_string()];
        let input = read_input(&words, "ignored".as_bytes()).unwrap();
        assert_eq!(input, "Bună ziua");
    }

    #[test]
    fn stdin_is_read_whole() {
        let input = read_input(&[], "mama\ntata\n".as_bytes()).unwrap();
        assert_eq!(input, "mama\ntata");
    }

    #[test]
    fn stdin_drops_one_line_ending() {
        assert_eq!(read_input(&[], "copii\r\n".as_bytes()).unwrap(), "copii");
        assert_eq!(read_input(&[], "copii\n\n".as_bytes()).unwrap(), "copii\n");
        assert_eq!(read_input(&[], "copii".as_bytes()).unwrap(), "copii");
        assert_eq!(read_input(&[], "".as_bytes()).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_stdin_is_an_error() {
        let bytes: &[u8] = &[0x66, 0xFF, 0x66];
        let err = read_input(&[], bytes).unwrap_err();
        assert!(matches!(err, CliError::ReadInput(_)));
        assert!(err.to_string().starts_with("failed to read stdin"));
    }

    #[test]
    fn explain_output_lists_steps() {
        let mut out = Vec::new();
        write_explain(&mut out, &translit_ro::explain("ceai")).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ceai -> чаи");
        assert!(lines[1].contains("priority table"));
        assert!(lines[2].contains("finishing table"));
    }

    #[test]
    fn explain_output_skips_empty_fragments() {
        let mut out = Vec::new();
        write_explain(&mut out, &translit_ro::explain(" a ")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("a -> а"));
    }

    #[test]
    fn json_output_is_an_array() {
        let mut out = Vec::new();
        write_json(&mut out, &translit_ro::explain("mama tata")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["output"], "тата");
    }
}
