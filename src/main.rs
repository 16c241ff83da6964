use std::sync::Arc;

use rentr_mail::config::Config;
use rentr_mail::dispatch::Dispatcher;
use rentr_mail::http::mail_routes;
use rentr_mail::mailer::{MailTransport, SmtpMailer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    eprintln!("📮 RentR Mail v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   SMTP: {}:{}", config.smtp_host, config.smtp_port);
    eprintln!("   From: {}", config.from_address);
    eprintln!("   API:  http://0.0.0.0:{}\n", config.listen_port);

    let mailer: Arc<dyn MailTransport> = Arc::new(SmtpMailer::new(&config)?);
    let dispatcher = Arc::new(Dispatcher::new(
        config.from_address.clone(),
        Arc::clone(&mailer),
    ));

    let app = mail_routes(dispatcher, mailer, config.from_address.clone());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.listen_port)).await?;
    tracing::info!(port = config.listen_port, "Mail relay started");
    axum::serve(listener, app).await?;

    Ok(())
}
