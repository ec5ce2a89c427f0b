use rapide::config::Config;
use rapide::server;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match Config::from_args(std::env::args().skip(1)) {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    tokio::select! {
        res = server::listener::run(Arc::clone(&cfg)) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Stopped, see you next time!");
        }
    }

    Ok(())
}
