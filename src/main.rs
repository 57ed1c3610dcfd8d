/// Main entry point for the Team Directory MCP server
/// 
/// This file sets up logging, parses command line arguments, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use team_directory_mcp::{DirectoryServer, ServerConfig};

/// Look for a seed file in the user's config directory
fn get_default_seed_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("team-directory-mcp");
    path.push("seed.json");
    
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Command line arguments for the Team Directory MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON seed file with "users" and "projects" arrays
    /// If not provided, uses seed.json in the user's config directory when present,
    /// otherwise the built-in sample data
    #[arg(long)]
    seed: Option<PathBuf>,
    
    /// Reject seed projects assigned to users that don't exist
    #[arg(long)]
    strict_references: bool,
    
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
    
    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    
    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };
    
    tracing_subscriber::fmt()
        .with_env_filter(format!("team_directory_mcp={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();
    
    info!("Starting Team Directory MCP server");
    
    let config = ServerConfig {
        seed_path: args.seed.or_else(get_default_seed_path),
        strict_references: args.strict_references,
    };
    
    if let Some(path) = &config.seed_path {
        info!("Using seed data from: {}", path.display());
    }
    
    // Create and start the directory server
    let server = DirectoryServer::new(config)?;
    
    // Run the MCP server - this will handle JSON-RPC communication over stdin/stdout
    server.run().await?;
    
    info!("Team Directory MCP server shutdown complete");
    Ok(())
}
