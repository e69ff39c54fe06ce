use clap::{Parser, Subcommand};
use doorbell_bridge::bootstrap;
use doorbell_bridge::client::ExchangeOutcome;
use doorbell_bridge::config::{DEFAULT_NAME, DEFAULT_PORT, DeviceConfig};
use doorbell_bridge::registry::CapabilityRegistry;
use log::{error, info};

#[derive(Parser)]
#[command(name = "doorbell-bridge")]
#[command(about = "Drive a local doorbell's capabilities from the command line")]
struct Cli {
    /// Doorbell hostname or IP
    #[arg(long, env = "DOORBELL_HOST")]
    host: String,

    /// Doorbell API port
    #[arg(long, env = "DOORBELL_PORT", default_value = DEFAULT_PORT)]
    port: String,

    /// Device id used to namespace the capability unique ids
    #[arg(long, env = "DOORBELL_ID")]
    id: String,

    /// Display name for the registered capabilities
    #[arg(long, env = "DOORBELL_NAME", default_value = DEFAULT_NAME)]
    name: String,

    /// Bearer token for the doorbell API
    #[arg(long, env = "DOORBELL_TOKEN")]
    token: String,

    /// Verify TLS certificates when fetching the camera image URL
    #[arg(long, env = "DOORBELL_VERIFY_TLS")]
    verify_tls: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire the door-open action once
    Open,
    /// Run one refresh cycle, announcing the ring entity id to the device
    Sync,
    /// Print the camera snapshot URL
    ImageUrl,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let cli = Cli::parse();
    let config = DeviceConfig {
        id: cli.id,
        name: cli.name,
        host: cli.host,
        port: cli.port,
        token: cli.token,
        verify_tls: cli.verify_tls,
    };

    let mut registry = CapabilityRegistry::new();
    let registration = bootstrap::setup(&config, &mut registry)?;

    match cli.command {
        Commands::Open => {
            let outcome = registry
                .invoke(&registration.opener_entity_id)
                .await
                .expect("opener was registered")?;
            match outcome {
                ExchangeOutcome::Success { .. } => info!("Door open request accepted"),
                ExchangeOutcome::DeviceError { status, .. } => {
                    // The device's own error text is already logged by the adapter.
                    error!("Door open request rejected with status {}", status);
                    std::process::exit(1);
                }
            }
        }
        Commands::Sync => {
            registry.refresh_all().await;
            if registry.is_available(&registration.ring_entity_id) {
                info!("Ring trigger synced as {}", registration.ring_entity_id);
            } else {
                error!("Ring trigger unreachable");
                std::process::exit(1);
            }
        }
        Commands::ImageUrl => {
            let image = registry
                .get(&registration.image_entity_id)
                .expect("image was registered")
                .capability();
            println!(
                "{}",
                image.image_url().expect("image capability exposes a URL")
            );
        }
    }

    Ok(())
}
