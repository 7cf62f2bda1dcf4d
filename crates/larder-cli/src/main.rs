use clap::Parser;
use larder_cli::args::{Cli, Command};
use larder_cli::client::{read_source, Client};
use larder_core::recipe::Recipe;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = Client::new(cli.server);

    match cli.command {
        Command::Add { source } => {
            let body = read_source(&source)?;
            let recipe: Recipe = serde_json::from_str(&body)?;
            let id = client.add(&recipe)?;
            println!("{id}");
        }
        Command::Get { id } => {
            let recipe = client.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        Command::List => {
            let recipes = client.list()?;
            println!("{}", serde_json::to_string_pretty(&recipes)?);
        }
        Command::Update { id, source } => {
            let body = read_source(&source)?;
            let recipe: Recipe = serde_json::from_str(&body)?;
            client.update(&id, &recipe)?;
            println!("updated: {id}");
        }
        Command::Remove { id } => {
            client.remove(&id)?;
            println!("removed: {id}");
        }
        Command::Status => {
            let health = client.health()?;
            println!("status:  {}", health["status"].as_str().unwrap_or("unknown"));
            println!("recipes: {}", health["recipes"]);
            println!("uptime:  {}s", health["uptime_seconds"]);
        }
    }

    Ok(())
}
