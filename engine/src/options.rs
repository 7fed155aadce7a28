//! §4.I Configuration Serializer: produce the canonical, result-affecting option string used as
//! the results store's key.

/// The configuration keys the host supplies (§6). Only `command_line` and, when debug is active,
/// `debug_command_line` are result-affecting; the `*_non_config` fields are excluded.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub command_line: Vec<String>,
    pub command_line_non_config: Vec<String>,
    pub debug_command_line: Vec<String>,
    pub debug_command_line_non_config: Vec<String>,
    pub output_format: String,
    pub debug_active: bool,
}

/// Produce the whitespace-joined, result-affecting configuration string: base options, the
/// output-format flag, and (only when debug is active) the debug-affecting options.
pub fn serialize_configuration(opts: &ScanOptions) -> String {
    let mut parts: Vec<&str> = opts.command_line.iter().map(String::as_str).collect();
    parts.push(&opts.output_format);
    if opts.debug_active {
        parts.extend(opts.debug_command_line.iter().map(String::as_str));
    }
    parts.join(" ")
}
