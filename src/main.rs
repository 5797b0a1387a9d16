use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use comuna::server::{self, AppState};
use comuna::weather::{WeatherView, UNAVAILABLE_MESSAGE};
use comuna::{site_pages, SearchResolver, WeatherClient, WeatherConfig, WeatherMonitor};

mod cli;
use cli::{display, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pages { json } => {
            let pages = site_pages();
            if json {
                println!("{}", serde_json::to_string_pretty(&pages)?);
            } else {
                display::print_pages(&pages);
            }
        }

        Commands::Search { query, limit, json } => {
            // No index capability on the command line; every query resolves
            // through the catalog fallback.
            let resolver = SearchResolver::new(site_pages(), None);
            resolver.open();
            let mut results = resolver.query(&query).await;
            if let Some(limit) = limit {
                results.truncate(limit);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_results(&query, &results);
            }
            resolver.close();
        }

        Commands::Weather { json, watch } => {
            let client = WeatherClient::new(WeatherConfig::from_env())?;
            if watch {
                watch_weather(client, json).await?;
            } else {
                match client.fetch_current().await {
                    Ok(conditions) => {
                        if json {
                            println!("{}", serde_json::to_string_pretty(&conditions)?);
                        } else {
                            display::print_conditions(&conditions);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "weather fetch failed");
                        eprintln!("{UNAVAILABLE_MESSAGE}");
                        std::process::exit(1);
                    }
                }
            }
        }

        Commands::Serve { bind } => {
            let state = AppState {
                catalog: Arc::new(site_pages()),
                weather: Arc::new(WeatherClient::new(WeatherConfig::from_env())?),
            };
            server::serve(bind, state).await?;
        }
    }

    Ok(())
}

async fn watch_weather(client: WeatherClient, json: bool) -> anyhow::Result<()> {
    let monitor = WeatherMonitor::new(client);
    let mut view = monitor.subscribe();
    tokio::spawn(async move { monitor.run().await });

    loop {
        tokio::select! {
            changed = view.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                let current = view.borrow_and_update().clone();
                match current {
                    WeatherView::Loading => {}
                    WeatherView::Ready(conditions) => {
                        if json {
                            println!("{}", serde_json::to_string(&conditions)?);
                        } else {
                            display::print_conditions(&conditions);
                        }
                    }
                    WeatherView::Unavailable { message } => eprintln!("{message}"),
                }
            }
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}
