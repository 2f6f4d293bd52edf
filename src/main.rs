mod web;

use std::io;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use loginform::config::Settings;

use crate::web::middleware::SecurityHeaders;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = Settings::from_env().map_err(io::Error::other)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    log::info!("Serving login page on http://{}", settings.bind_addr);

    let bind_addr = settings.bind_addr;
    let state = Data::new(web::AppState { settings });

    HttpServer::new(move || {
        let settings = &state.settings;

        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .configure(web::routes::configure)
            .service(Files::new("/static", settings.static_dir.clone()).prefer_utf8(true))
            .service(Files::new("/pkg", settings.pkg_dir.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}
