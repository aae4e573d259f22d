//! Drives the client manager screen against a running backend.
//!
//! ```bash
//! BACKROOM_URL=http://localhost:8080 cargo run --example console_demo
//! ```

use backroom_client::{ClientConfig, EntityClient};
use backroom_console::screens::{ClientFilter, ClientScreen};
use shared::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("BACKROOM_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let api: EntityClient<Client> = EntityClient::new(ClientConfig::new(base_url).build_http_client());

    let mut screen = ClientScreen::new();
    screen.refresh(&api).await;
    if let Some(notice) = screen.take_notice() {
        eprintln!("{}", notice.message);
        return Ok(());
    }

    let term = std::env::args().nth(1).unwrap_or_default();
    screen.set_filter(ClientFilter { search: term });

    println!("{:<6} {:<24} {:<28} {}", "id", "name", "contact", "address");
    for client in screen.visible() {
        println!(
            "{:<6} {:<24} {:<28} {}",
            client.id, client.name, client.contact, client.address
        );
    }
    Ok(())
}
