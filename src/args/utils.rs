//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
/// - `RUST_LOG`, when set, still wins over both (see `main`).
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse entry ids from input, handling both comma-separated and space-separated formats.
///
/// Inputs:
/// - `values`: Raw argument values (may contain comma-separated ids).
///
/// Output:
/// - Individual ids in input order.
///
/// Details:
/// - Splits each value by commas and trims whitespace; empty pieces are dropped.
#[must_use]
pub fn parse_id_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
