use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use tg_botname::infrastructure::adapters::telegram::{
    decode_bot_name, ApiRequest, GetMyName, PreparedRequest, SetMyName, TelegramApi,
};
use tg_botname::infrastructure::config::Config;
use tg_botname::{ApiObject, BotError, BotName};

#[derive(Parser)]
#[command(name = "tg-botname")]
#[command(about = "Inspect and prepare Telegram bot name API calls", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a getMyName response body
    Parse {
        /// Read from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Input is a bare BotName object (or null), not a response envelope
        #[arg(long)]
        raw: bool,
    },
    /// Prepare a getMyName request
    GetName {
        #[arg(short, long)]
        language_code: Option<String>,
    },
    /// Prepare a setMyName request
    SetName {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        language_code: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BotError> {
    match cli.command {
        Commands::Parse { file, raw } => parse(file, raw),
        Commands::GetName { language_code } => {
            let config = load_config(&cli.config, cli.token);
            let mut request = GetMyName::new();
            if let Some(code) = language_code.or(config.telegram.language_code.clone()) {
                request = request.with_language_code(code);
            }
            print_request(&config, &request)
        }
        Commands::SetName { name, language_code } => {
            let config = load_config(&cli.config, cli.token);
            let mut request = SetMyName::new();
            if let Some(name) = name {
                request = request.with_name(name);
            }
            if let Some(code) = language_code.or(config.telegram.language_code.clone()) {
                request = request.with_language_code(code);
            }
            print_request(&config, &request)
        }
        Commands::Version => {
            println!("tg-botname v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    }
}

fn load_config(config_path: &str, token_override: Option<String>) -> Config {
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    if let Some(token) = token_override {
        config.telegram.token = Some(token);
    }

    config
}

fn parse(file: Option<PathBuf>, raw: bool) -> Result<(), BotError> {
    let body = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };

    let bot_name = if raw {
        BotName::from_json(&body)?
    } else {
        decode_bot_name(&body)?
    };

    match bot_name {
        Some(bot_name) => println!("{}", bot_name),
        None => println!("no bot name set"),
    }
    Ok(())
}

fn print_request<R: ApiRequest>(config: &Config, request: &R) -> Result<(), BotError> {
    let api = TelegramApi::from_config(config)?;
    let PreparedRequest { method, body, .. } = api.prepare(request)?;

    println!("POST {}", api.redacted_url(method));
    println!("Content-Type: application/json");
    println!();
    println!("{}", body);
    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let config = Config::default();
    let yaml = config.to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
