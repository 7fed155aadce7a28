//! Ambient, environment-driven configuration for the engine: the externally supplied inputs
//! §4.D, §4.E and §4.G call out (root-license matchers, proximity tolerance, timeout constant).

const DEFAULT_ROOT_LICENSE_GLOBS: &[&str] = &[
    "LICENSE",
    "LICENSE.txt",
    "LICENSE.md",
    "COPYING",
    "COPYING.txt",
    "license",
    "license.txt",
    "license.md",
    "copying",
    "copying.txt",
];

const DEFAULT_TOLERANCE_LINES: u32 = 5;
const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Glob patterns identifying "commonly named license files" for root-license detection.
    pub root_license_globs: Vec<String>,
    /// Maximum line distance for proximity-based copyright-to-license attribution (§4.E).
    pub tolerance_lines: u32,
    /// The ScanCode `timeout` value a timeout diagnostic must match to count (§4.G).
    pub timeout_seconds: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root_license_globs: DEFAULT_ROOT_LICENSE_GLOBS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tolerance_lines: DEFAULT_TOLERANCE_LINES,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to the documented defaults.
    /// Loads a `.env` file first, mirroring the teacher's `Config::from_env`.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let root_license_globs = match std::env::var("SCANCODE_ROOT_LICENSE_GLOBS") {
            Ok(raw) => raw.split(',').map(|s| s.trim().to_string()).collect(),
            Err(_) => DEFAULT_ROOT_LICENSE_GLOBS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let tolerance_lines = std::env::var("SCANCODE_TOLERANCE_LINES")
            .unwrap_or_else(|_| DEFAULT_TOLERANCE_LINES.to_string())
            .parse()?;

        let timeout_seconds = std::env::var("SCANCODE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECONDS.to_string())
            .parse()?;

        Ok(Self {
            root_license_globs,
            tolerance_lines,
            timeout_seconds,
        })
    }
}
