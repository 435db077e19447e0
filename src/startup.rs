use crate::configuration::Settings;
use crate::connectors::Stores;
use crate::routes;
use crate::session::SessionContext;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    stores: Stores,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let session = SessionContext::new();
    session
        .hydrate(
            stores.auth.as_ref(),
            stores.documents.as_ref(),
            &settings.backend,
        )
        .await;
    let session = web::Data::new(session);

    let settings = web::Data::new(settings);
    let auth_store = web::Data::new(stores.auth.clone());
    let document_store = web::Data::new(stores.documents.clone());
    let file_store = web::Data::new(stores.files.clone());

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/auth")
                    .service(routes::auth::login_handler)
                    .service(routes::auth::register_handler)
                    .service(routes::auth::logout_handler)
                    .service(routes::auth::me_handler)
                    .service(routes::auth::google_handler)
                    .service(routes::auth::profile_update_handler)
                    .service(routes::auth::avatar_upload_handler),
            )
            .service(
                web::scope("/project")
                    .service(routes::project::get::count)
                    .service(routes::project::get::list)
                    .service(routes::project::get::item)
                    .service(routes::project::add::item)
                    .service(routes::project::update::item)
                    .service(routes::project::delete::item),
            )
            .service(
                web::scope("/feedback")
                    .service(routes::feedback::add_handler)
                    .service(routes::feedback::list_by_project_handler)
                    .service(routes::feedback::delete_many_handler)
                    .service(routes::feedback::delete_handler),
            )
            .app_data(json_config.clone())
            .app_data(session.clone())
            .app_data(auth_store.clone())
            .app_data(document_store.clone())
            .app_data(file_store.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
