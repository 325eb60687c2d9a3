// Campus Notify CLI - run the web server or exercise alerts from a terminal

use anyhow::Result;
use campus_notify_core::{
    run_demonstrations, EmergencyNotifier, Registry, StdoutSink, UserNotification,
};
use campus_notify_web::{serve, WebConfig};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "campus-notify")]
#[command(about = "Simulated campus alert delivery", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (overrides configuration)
        #[arg(long, env = "CAMPUS_NOTIFY_PORT")]
        port: Option<u16>,

        /// Address to bind (overrides configuration)
        #[arg(long)]
        host: Option<String>,
    },

    /// Send one alert and print what each channel delivers
    Send {
        /// Alert type: SECURITY, WEATHER, HEALTH or ACADEMIC
        #[arg(value_name = "TYPE")]
        alert_type: String,

        /// Alert message
        message: String,
    },

    /// Run the feature demonstrations
    Demo,

    /// List registered notification types
    Registry,

    /// Show every emergency capability for a message
    Emergency {
        #[arg(default_value = "Campus incident")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            let mut config = WebConfig::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            info!(port = config.port, host = %config.host, "Starting web server");
            if let Err(e) = serve(config).await {
                error!("Server stopped: {}", e);
                eprintln!("❌ Failed to start server: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Send {
            alert_type,
            message,
        } => {
            let registry = Registry::builtin();
            let mut alert = registry.construct(&alert_type, message, Arc::new(StdoutSink))?;
            let result = alert.send()?;
            println!("✅ {}", result);
        }

        Commands::Demo => {
            let registry = Registry::builtin();
            for result in run_demonstrations(&registry, Arc::new(StdoutSink)) {
                println!("{:<18} {}", result.section, result.outcome);
            }
            println!("UserNotification instances: {}", UserNotification::instances());
        }

        Commands::Registry => {
            let registry = Registry::builtin();
            println!("{} registered types:", registry.len());
            for entry in registry.entries() {
                let kind = entry.alert_kind.map(|k| k.tag()).unwrap_or("-");
                println!(
                    "  {:<18} {:<9} {}",
                    entry.name,
                    kind,
                    entry.registered_at.format("%H:%M:%S%.3f")
                );
            }
        }

        Commands::Emergency { message } => {
            let notifier = EmergencyNotifier::new("cli");
            println!("Resolution order:");
            for (i, name) in notifier.resolution_order().iter().enumerate() {
                println!("  {}. {}", i, name);
            }
            for line in notifier.notify_all(&message) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from(["campus-notify", "send", "WEATHER", "Heavy rain"]).unwrap();
        match cli.command {
            Commands::Send {
                alert_type,
                message,
            } => {
                assert_eq!(alert_type, "WEATHER");
                assert_eq!(message, "Heavy rain");
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_parse_serve_port() {
        let cli = Cli::try_parse_from(["campus-notify", "serve", "--port", "8080"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: Some(8080), .. }));
    }

    #[test]
    fn test_send_requires_message() {
        assert!(Cli::try_parse_from(["campus-notify", "send", "SECURITY"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
