use clap::Parser;
use jhash::jhash;
use tracing::{Level, debug};

#[derive(Parser)]
#[command(
    name = "jhash",
    about = "Hash strings with the kernel's Jenkins lookup3 hash",
    version,
    long_about = "Hashes each string argument with jhash, folding the arguments \
left to right by feeding every intermediate hash back in as the seed, and \
prints the final 32-bit value as hexadecimal."
)]
struct Cli {
    /// Strings to hash, folded left to right through the seed
    #[arg(required = true)]
    keys: Vec<String>,

    /// Initial seed value, or a previous hash to chain from
    #[arg(short, long, default_value_t = 0)]
    seed: u32,

    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .init();

    let mut hash = cli.seed;
    for key in &cli.keys {
        hash = jhash(key.as_bytes(), hash);
        debug!("chained {key:?} -> {hash:08x}");
    }

    println!("{hash:x}");
}
