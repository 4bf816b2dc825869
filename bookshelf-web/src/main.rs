//! Bookshelf Web Server
//!
//! HTTP interface for the bookshelf catalog service.

use bookshelf_web::server::BookshelfServerBuilder;
use bookshelf_web::{init_logging, WebConfig};
use clap::Parser;

/// Bookshelf Web Server - bookstore catalog with per-user reviews
#[derive(Parser)]
#[command(name = "bookshelf-web")]
#[command(about = "HTTP interface for the bookshelf catalog service")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Artificial delay applied to read endpoints, in milliseconds
    #[arg(long)]
    simulated_delay_ms: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging first
    std::env::set_var(
        "RUST_LOG",
        format!("bookshelf_web={},tower_http=debug", args.log_level),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Create web configuration, command line overriding the environment
    let mut config = WebConfig::from_env();
    config.host = args.host;
    config.port = args.port;
    if args.simulated_delay_ms.is_some() {
        config.simulated_delay_ms = args.simulated_delay_ms;
    }

    // Print startup information
    println!("🚀 Starting Bookshelf Web Server");
    println!("📍 Server: http://{}:{}", config.host, config.port);
    if let Some(delay_ms) = config.simulated_delay_ms {
        println!("🐢 Simulated latency on read endpoints: {}ms", delay_ms);
    }

    // Build and start the server (this will block until shutdown)
    let mut builder = BookshelfServerBuilder::new()
        .host(config.host)
        .port(config.port);
    if let Some(delay_ms) = config.simulated_delay_ms {
        builder = builder.simulated_delay_ms(delay_ms);
    }

    if let Err(e) = builder.build().start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }

    println!("✅ Server shut down gracefully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        use clap::Parser;

        // Test default values
        let args = Args::parse_from(["bookshelf-web"]);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
        assert!(args.simulated_delay_ms.is_none());

        // Test custom values
        let args = Args::parse_from([
            "bookshelf-web",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--simulated-delay-ms",
            "100",
        ]);
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 3000);
        assert_eq!(args.simulated_delay_ms, Some(100));
    }
}
