//! Stocktake server binary
//!
//! HTTP service for barcode stocktaking over 1C stock reports.

use clap::Parser;
use stocktake::api::{run_api_server, ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "stocktake-server")]
#[command(version)]
#[command(about = "Stocktake server - upload a stock report, attach barcodes, download the patched export")]
#[command(long_about = r#"
Stocktake server - barcode collection over 1C stock reports

Endpoints:
  - POST /api/upload                 - Upload a report (.xls/.xlsx), replaces the session
  - GET  /api/session                - Current session summary
  - GET  /api/products               - List products (has_barcode, search, skip, limit)
  - PUT  /api/products/:id/barcode   - Replace a product's barcode/quantity fields
  - GET  /api/download               - Download the patched report

Additional endpoints:
  - GET  /health                     - Health check
  - GET  /version                    - Server version info

Example usage:
  stocktake-server                           # Start on localhost:8080
  stocktake-server --host 0.0.0.0 --port 3000

  curl -F "file=@report.xls" http://localhost:8080/api/upload
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "STOCKTAKE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "STOCKTAKE_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    run_api_server(ApiConfig {
        host: args.host,
        port: args.port,
    })
    .await
}
