use clap::Parser;

/// Environment variable that enables diagnostic tooling when set to `development`.
pub const DEV_ENV_VAR: &str = "TESSERA_ENV";

/// Tessera — tile web pages full screen, each in its own isolated context.
#[derive(Parser, Debug)]
#[command(name = "tessera", version, about)]
pub struct Args {
    /// Addresses to open, one pane each. Prefix with `^` to force dark rendering.
    #[arg(required = true, num_args = 1..)]
    pub addresses: Vec<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Open devtools for every pane.
    #[arg(long)]
    pub devtools: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Whether the environment asks for development diagnostics.
pub fn development_env() -> bool {
    std::env::var(DEV_ENV_VAR).is_ok_and(|v| is_development(&v))
}

fn is_development(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("development")
}
