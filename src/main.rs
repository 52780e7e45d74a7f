use pokedex::{App, PokeApiClient, KANTO_DEX_SIZE};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokedex=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = PokeApiClient::new();
    println!("Loading the first {} Pokemon from {}...", KANTO_DEX_SIZE, client.base_url());

    let mut app = match App::load(client).await {
        Ok(app) => app,
        Err(err) => {
            // Every load failure degrades to the same user-visible state:
            // no list, one explanation, nonzero exit.
            eprintln!("Pokemon are unavailable right now: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = app.run().await {
        eprintln!("Terminal error: {}", err);
        std::process::exit(1);
    }
}
