use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "contact-cli")]
#[command(about = "Command-line client for the contact book service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all contacts, newest first
    List,
    /// Show a single contact
    Get { id: i64 },
    /// Add a contact
    Add {
        name: String,
        phone: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Replace a contact's fields
    Update {
        id: i64,
        name: String,
        phone: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a contact
    Remove { id: i64 },
    /// Check service liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let res = client
                .get(format!("{}/api/contacts", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client
                .get(format!("{}/api/contacts/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let res = client
                .post(format!("{}/api/contacts", cli.url))
                .json(&json!({
                    "name": name,
                    "phone": phone,
                    "email": email,
                    "address": address,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Update {
            id,
            name,
            phone,
            email,
            address,
        } => {
            let res = client
                .put(format!("{}/api/contacts/{}", cli.url, id))
                .json(&json!({
                    "name": name,
                    "phone": phone,
                    "email": email,
                    "address": address,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Remove { id } => {
            let res = client
                .delete(format!("{}/api/contacts/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Request failed with status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
