use std::error::Error;
use std::net::SocketAddr;
use std::str::FromStr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pass_planner::cache::CacheConfig;
use pass_planner::planner::{SearchConfig, sweep};
use pass_planner::report::render_sweep;
use pass_planner::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SearchConfig::default().with_overrides(
        env_var("PASS_PLANNER_STATIONS"),
        env_var("PASS_PLANNER_MAX_WALK"),
    );

    match std::env::args().nth(1).as_deref() {
        None => print_sweep(&config)?,
        Some("serve") => serve(config).await?,
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!("Usage: pass-planner [serve]");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Print the report for every walk budget in the configured sweep.
fn print_sweep(config: &SearchConfig) -> Result<(), Box<dyn Error>> {
    let line = config.line()?;
    let results = sweep(&line, config.sweep_budgets())?;
    print!("{}", render_sweep(&results));
    Ok(())
}

async fn serve(config: SearchConfig) -> Result<(), Box<dyn Error>> {
    let addr: SocketAddr = match env_var("PASS_PLANNER_ADDR") {
        Some(addr) => addr,
        None => DEFAULT_ADDR.parse()?,
    };

    let state = AppState::new(config, &CacheConfig::default());
    let app = create_router(state);

    info!(%addr, "pass planner listening");
    println!("Pass Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health  - Health check");
    println!("  GET  /plan    - Plan one walk budget (?walk_budget=2&stations=7)");
    println!("  GET  /sweep   - Plan every budget up to ?max_walk_budget=3");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Read and parse an environment variable. Malformed values are logged and
/// treated as unset.
fn env_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "invalid value, using default");
            None
        }
    }
}
