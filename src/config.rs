/// How command results are rendered: JSON by default, or a table when the
/// global `--table` flag is set (units listings are the main consumer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

/// Per-invocation settings derived from the global CLI flags; `verbose`
/// echoes each API request line to stderr.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub verbose: bool,
}
