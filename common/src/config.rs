use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

pub struct Config {
    /// Upper bound on a single connection attempt.
    pub timeout: Duration,
    /// Accepts hostnames as targets in addition to IP literals.
    pub allow_hostnames: bool,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops decorations, 2 prints results only.
    pub quiet: u8,
    /// Disables the 'q' keyboard listener used to stop a scan early.
    pub disable_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            allow_hostnames: false,
            no_banner: false,
            quiet: 0,
            disable_input: false,
        }
    }
}
