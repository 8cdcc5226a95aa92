use clap::{Parser, Subcommand};

use flight_proxy::flights::{FlightResult, SearchRequest};

#[derive(Parser)]
#[command(name = "flight-cli")]
#[command(about = "Command-line client for the flight proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the proxy is up
    Status,
    /// Search for flights
    Search {
        /// Departure airport code
        #[arg(long)]
        from: String,
        /// Arrival airport code
        #[arg(long)]
        to: String,
        /// Travel class (e.g. ECONOMY, BUSINESS)
        #[arg(long = "class", default_value = "ECONOMY")]
        travel_class: String,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", base)).send().await?;
            if res.status().is_success() {
                println!("Proxy at {} is up ({})", base, res.status());
            } else {
                eprintln!("Error: proxy returned status {}", res.status());
            }
        }
        Commands::Search { from, to, travel_class, json } => {
            let req = SearchRequest { from, to, travel_class };
            let res = client
                .post(format!("{}/search", base))
                .json(&req)
                .send()
                .await?;

            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: proxy returned status {}", status);
                if let Ok(text) = res.text().await {
                    eprintln!("Response: {}", text);
                }
                return Ok(());
            }

            let results: Vec<FlightResult> = res.json().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_table(&results);
            }
        }
    }

    Ok(())
}

fn print_table(results: &[FlightResult]) {
    if results.is_empty() {
        println!("No flights found");
        return;
    }

    println!(
        "{:<20} {:<20} {:<10} {:>7}  {:<18} {:<8} {}",
        "DEPARTS", "ARRIVES", "DURATION", "PRICE", "AIRLINE", "FLIGHT", "STOPS"
    );
    for r in results {
        println!(
            "{:<20} {:<20} {:<10} {:>7}  {:<18} {:<8} {}",
            r.departure_time, r.arrival_time, r.duration, r.price, r.airline, r.flight_number, r.stops
        );
    }
}
