mod common;
pub mod config;
mod error;
pub mod functions;
pub mod logging;
mod request_reader;
mod response_writer;

pub use common::EventResponse;
pub use config::ServerConfig;
pub use error::HandlerError;

use actix_web::{web, App, HttpResponse, HttpServer};
use cloudevent::Event;

/// A function invoked once per inbound event.
pub type UserFunction = fn(Event) -> Result<EventResponse, HandlerError>;

async fn invoke_function(
    user_function: web::Data<UserFunction>,
    body: web::Payload,
) -> Result<HttpResponse, HandlerError> {
    let body = request_reader::read_body(body).await?;
    let event = request_reader::read_cloud_event(&body)?;
    let response = user_function.get_ref()(event)?;
    response_writer::write_event_response(response)
}

async fn handle_event(
    user_function: web::Data<UserFunction>,
    body: web::Payload,
) -> Result<HttpResponse, HandlerError> {
    let result = invoke_function(user_function, body).await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "failed to handle event");
    }
    result
}

/// Registers `/` for every method, dispatching to `user_function`.
pub fn configure(user_function: UserFunction) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(user_function))
            .service(web::resource("/").route(web::route().to(handle_event)));
    }
}

/// Serves `user_function` until the server stops.
///
/// Fails only when the listener cannot be bound.
pub async fn start_runtime(user_function: UserFunction, config: ServerConfig) -> std::io::Result<()> {
    let addr = config.bind_address();
    tracing::info!(%addr, "Starting HTTP server...");

    HttpServer::new(move || App::new().configure(configure(user_function)))
        .bind(addr)
        .map_err(|err| {
            tracing::error!(%addr, error = %err, "cannot bind listener");
            err
        })?
        .run()
        .await
}
