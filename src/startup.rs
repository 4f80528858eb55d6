use crate::configuration::Settings;
use crate::routes;
use crate::services::{CommentStore, SubmitFlow};
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn CommentStore>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let submit_flow = web::Data::new(SubmitFlow::new(
        store.clone(),
        Duration::from_millis(settings.reload_delay_ms),
    ));
    let store = web::Data::new(store);

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
            // The widget is served from arbitrary origins.
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/comments")
                    .service(routes::comment::add_handler)
                    .service(routes::comment::list_handler),
            )
            .app_data(json_config.clone())
            .app_data(submit_flow.clone())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
