use crate::config::Config;
use crate::http::connection::Connection;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    info!(
        "Running at http://{} serving \"{}\"",
        cfg.listen_addr(),
        cfg.root.display()
    );
    info!("Press Ctrl + C to stop");

    loop {
        let (socket, peer) = listener.accept().await?;

        let cfg = Arc::clone(&cfg);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, cfg);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
