use std::env;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use common::util::state::RelaySettings;
use service::build_app;
use service::state::ServiceCollection;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::fmt().json().finish();
    tracing::subscriber::set_global_default(subscriber).expect("Could not init tracing.");

    let port = get_port();
    let api_key = get_api_key();
    let api_uri = get_api_uri();

    if api_key.is_none() {
        warn!("CLOUDCONVERT_API_KEY is not set, provider calls will be rejected");
    }

    let settings = RelaySettings { api_key, api_uri };
    let services = ServiceCollection::build(&settings);
    let app = build_app(services);

    let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0)), port);
    info!("listening on {}", &addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

fn get_port() -> u16 {
    let port = env::var("PORT").map(|port| port.parse::<u16>());
    match port {
        Ok(Ok(port)) => port,
        _ => 3000,
    }
}

fn get_api_key() -> Option<String> {
    env::var("CLOUDCONVERT_API_KEY").ok().filter(|key| !key.is_empty())
}

fn get_api_uri() -> String {
    env::var("CLOUDCONVERT_API_URI").unwrap_or_else(|_| "https://api.cloudconvert.com/v2".to_string())
}
