use clap::{Parser, Subcommand, ValueEnum};
use spirit_dns_domain::{CliOverrides, RecordType};
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "spirit-dns")]
#[command(version)]
#[command(about = "Spirit DNS - DNS wire codec and TTL answer cache")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Seconds between cache sweeps
    #[arg(long)]
    sweep_interval: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the answer cache with its background sweep until Ctrl-C
    Run,

    /// Decode a base64 DNS message and print it
    Decode {
        message: String,

        /// Read compression pointers with 6-bit offsets
        #[arg(long)]
        legacy_pointers: bool,
    },

    /// Print a base64 query message for NAME and TYPE
    Query {
        name: String,

        #[arg(default_value = "A")]
        record_type: RecordType,

        #[arg(long, default_value_t = 0)]
        id: u16,
    },

    /// Cache the answers of a base64 response and print the cache contents
    Replay { message: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        log_json: cli.log_format.map(|f| f == LogFormat::Json),
        sweep_interval_secs: cli.sweep_interval,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Spirit DNS v{}", env!("CARGO_PKG_VERSION"));
    info!(
        key_prefix = %config.cache.key_prefix,
        sweep_interval_secs = config.cache.sweep_interval_secs,
        audit = config.audit.enabled,
        "Configuration loaded"
    );

    match cli.command {
        Command::Run => commands::run(&config).await,
        Command::Decode {
            message,
            legacy_pointers,
        } => commands::decode(&message, legacy_pointers),
        Command::Query {
            name,
            record_type,
            id,
        } => commands::query(&name, record_type, id),
        Command::Replay { message } => commands::replay(&config, &message).await,
    }
}
