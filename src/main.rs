use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use signed_uri::api;
use signed_uri::models::AppConfig;
use signed_uri::server;
use signed_uri::services::SignatureEngine;

#[derive(Parser)]
#[command(name = "signed-uri")]
#[command(about = "Sign and verify tamper-evident, time-limited URLs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Sign a URI and print the signed form
    Sign {
        /// Absolute URI to sign
        uri: String,

        /// Seconds until the signature expires (config default if omitted)
        #[arg(short, long)]
        expiry: Option<u64>,
    },
    /// Verify a signed URI
    Verify {
        /// Signed URI exactly as received
        uri: String,

        /// Print "false" instead of failing on an invalid or expired signature
        #[arg(long)]
        no_raise: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "signed-uri API",
        description = "Sign and verify tamper-evident, time-limited URLs",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_sign, api::handle_verify),
    components(schemas(
        api::SignRequest,
        api::SignResponse,
        api::VerifyRequest,
        api::VerifyResponse,
    )),
    tags(
        (name = "Signing", description = "URI signing and verification")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sign { uri, expiry }) => run_sign_command(&uri, expiry),
        Some(Commands::Verify { uri, no_raise }) => run_verify_command(&uri, no_raise),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Minimal logging for one-shot CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signed_uri=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Sign a URI with the configured key and print it
fn run_sign_command(uri: &str, expiry: Option<u64>) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(config_path().as_deref());
    let key = config.secret_key()?;
    let engine = SignatureEngine::new(config.algorithm);

    let signed = engine.sign(uri, expiry.unwrap_or(config.default_expiry_secs), &key)?;
    println!("{signed}");

    Ok(())
}

/// Verify a signed URI with the configured key
fn run_verify_command(uri: &str, no_raise: bool) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load(config_path().as_deref());
    let key = config.secret_key()?;
    let engine = SignatureEngine::new(config.algorithm);

    if no_raise {
        println!("{}", engine.is_valid(uri, &key)?);
    } else {
        engine.verify(uri, &key)?;
        println!("true");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let config = AppConfig::load(config_path().as_deref());

    println!("signed-uri v{VERSION}");
    println!("Tamper-evident, time-limited URLs\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Never print the key itself
    let key_state = match config.secret_key() {
        Ok(_) => "set",
        Err(_) => "NOT SET",
    };
    println!("  {:<11} = ({key_state})", config.key_env);

    println!("\nSigning:");
    println!("  Algorithm:      {}", config.algorithm);
    println!("  Default expiry: {}s", config.default_expiry_secs);
    match config.max_expiry_secs {
        Some(max) => println!("  Max expiry:     {max}s"),
        None => println!("  Max expiry:     unbounded"),
    }

    println!("\nCommands:");
    println!("  signed-uri serve    Start the HTTP server");
    println!("  signed-uri sign     Sign a URI");
    println!("  signed-uri verify   Verify a signed URI");
    println!("\nRun 'signed-uri --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signed_uri=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::load(config_path().as_deref());

    let state = server::create_app_state(config)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "signed-uri server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
