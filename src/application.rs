use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use tracing_actix_web::TracingLogger;
use wire_shared::settings::{BackendSettings, Settings};

use crate::{
    backend::WireBackend,
    routes::{health_check, profile},
};

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        tracing::info!(%address, backend = %settings.backend.base_url(), "Starting profile server");

        let server = run(listener, settings.backend)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(listener: TcpListener, backend_settings: BackendSettings) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        // awc clients are bound to the worker's runtime, so every worker gets its own.
        let backend = Data::new(WireBackend::new(&backend_settings));

        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                Cors::default()
                    .allow_any_header()
                    .allow_any_method()
                    .allow_any_origin(),
            )
            .app_data(backend)
            .route("/health_check", web::get().to(health_check))
            .route("/profile/{username}", web::get().to(profile::profile_page))
            .route(
                "/profile/{username}/{section}",
                web::get().to(profile::profile_section),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
