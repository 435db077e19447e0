use feedy::configuration::get_configuration;
use feedy::connectors::{BackendClient, Stores};
use feedy::startup::run;
use feedy::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("feedy".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        endpoint = %settings.backend.endpoint,
        backend_project = %settings.backend.project_id,
        database = %settings.backend.database_id,
        "Connecting to hosted backend"
    );

    let backend = BackendClient::new(&settings.backend)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let backend = Arc::new(backend);
    let stores = Stores {
        auth: backend.clone(),
        documents: backend.clone(),
        files: backend,
    };

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|err| panic!("failed to bind to {}: {}", address, err));

    run(listener, stores, settings).await?.await
}
