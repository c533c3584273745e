pub mod config;
pub mod dtos;
pub mod error;
pub mod messages;
pub mod panic_handler;
pub mod routes;
pub mod services;
pub mod shared_state;
pub mod sort;
pub mod tracing_config;
pub mod validator;

pub use error::Error;

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{routing::IntoMakeService, Extension, Router};
use hyper::server::conn::AddrIncoming;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::{event, Level};

use crate::shared_state::InnerState;

pub struct Server {
    pub host: String,
    pub port: u16,
    pub server: axum::Server<AddrIncoming, IntoMakeService<Router>>,
}

pub async fn run_server(config: config::Config) -> Result<Server, anyhow::Error> {
    let db = devdesk_db::connect(config.database_url.as_str(), config.database_pool_size)?;

    let production = config.env != "development" && !cfg!(debug_assertions);

    let state = Arc::new(InnerState { production, db });

    let app = routes::configure_routes(Router::new()).layer(
        // Global middlewares
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(move |err| {
                panic_handler::handle_panic(production, err)
            }))
            .set_x_request_id(MakeRequestUuid)
            .propagate_x_request_id()
            .layer(Extension(state))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO)),
            )
            .into_inner(),
    );

    let bind_ip: IpAddr = config.host.parse()?;
    let addr = SocketAddr::from((bind_ip, config.port));
    let builder = axum::Server::bind(&addr);

    let server = builder.serve(app.into_make_service());
    let port = server.local_addr().port();
    event!(Level::INFO, "Listening on {}:{}", config.host, port);

    Ok(Server {
        host: config.host,
        port,
        server,
    })
}
