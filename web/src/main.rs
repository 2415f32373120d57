#![deny(missing_docs)]

//! # apigen Web Binary
//!
//! Runs `MyApi` and `OtherApi`, each on its own listener.

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use apigen_web::{serve_my_api, serve_other_api, MyApi, OtherApi};
use std::net::TcpListener;
use tracing_subscriber::EnvFilter;

fn build_my_server(listener: TcpListener, api: web::Data<MyApi>) -> std::io::Result<Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(api.clone())
            .default_service(web::to(serve_my_api))
    })
    .listen(listener)?
    .run())
}

fn build_other_server(listener: TcpListener, api: web::Data<OtherApi>) -> std::io::Result<Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(api.clone())
            .default_service(web::to(serve_other_api))
    })
    .listen(listener)?
    .run())
}

fn resolve_bind_addr(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let my_addr = resolve_bind_addr("APIGEN_WEB_BIND", "127.0.0.1:8080");
    let other_addr = resolve_bind_addr("APIGEN_WEB_OTHER_BIND", "127.0.0.1:8081");
    tracing::info!(%my_addr, %other_addr, "starting servers");

    let my_server = build_my_server(TcpListener::bind(my_addr)?, web::Data::new(MyApi::default()))?;
    let other_server = build_other_server(TcpListener::bind(other_addr)?, web::Data::new(OtherApi))?;

    let other_handle = other_server.handle();
    actix_web::rt::spawn(other_server);

    let result = my_server.await;
    other_handle.stop(true).await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bind_addr_default() {
        assert_eq!(
            resolve_bind_addr("APIGEN_WEB_TEST_UNSET_VAR", "127.0.0.1:9"),
            "127.0.0.1:9"
        );
    }

    #[actix_web::test]
    async fn test_build_servers_start_stop() {
        let my = build_my_server(
            TcpListener::bind("127.0.0.1:0").unwrap(),
            web::Data::new(MyApi::default()),
        )
        .unwrap();
        let other = build_other_server(
            TcpListener::bind("127.0.0.1:0").unwrap(),
            web::Data::new(OtherApi),
        )
        .unwrap();

        let my_handle = my.handle();
        let other_handle = other.handle();
        actix_web::rt::spawn(my);
        actix_web::rt::spawn(other);
        my_handle.stop(true).await;
        other_handle.stop(true).await;
    }
}
