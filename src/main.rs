use anyhow::Result;
use clap::Parser;
use particle_presentations_rust::config::ServerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "particle-presentations")]
#[command(about = "MCP server for soothing particle animation widgets", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "particles.toml")]
    config: PathBuf,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Directory containing particles.html
    #[arg(long, env = "ASSETS_DIR")]
    assets_dir: Option<PathBuf>,

    /// Embed the rendered widget HTML in tool results
    #[arg(long)]
    inline_widget: bool,
}

impl Args {
    /// Applies command-line overrides on top of the file configuration
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.assets_dir.is_some() {
            config.assets_dir = self.assets_dir;
        }
        if self.inline_widget {
            config.inline_widget = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "particle_presentations_rust=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = ServerConfig::load(&args.config)?;
    let config = args.apply(config);

    tracing::info!("Starting particle presentations MCP server");
    particle_presentations_rust::server::run(config).await?;

    Ok(())
}
