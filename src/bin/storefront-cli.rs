use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Developer CLI for the Bluejays storefront API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// Check service health
    Health,
    /// Preview a URL through the relay
    Preview {
        /// Destination URL to preview
        target: String,
    },
    /// Import a product from a remote catalog URL
    Import {
        /// Catalog URL to import from
        catalog: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Products => {
            let res = client.get(cli.url.join("/api/products")?).send().await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(cli.url.join("/health")?).send().await?;
            print_response(res).await?;
        }
        Commands::Preview { target } => {
            let res = client
                .post(cli.url.join("/api/preview-url")?)
                .json(&json!({ "targetUrl": target }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Import { catalog } => {
            let res = client
                .post(cli.url.join("/api/import-product")?)
                .json(&json!({ "catalogUrl": catalog }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
