use std::io;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use leptos::prelude::*;
use leptos_actix::{handle_server_fns, render_app_to_stream};
use leptos_router::Method;

use reciguard::api::backend::BackendClient;
use reciguard::config::AppConfig;
use reciguard::frontend::shell;
use reciguard::web::SecurityHeaders;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let backend = BackendClient::new(&config).map_err(io::Error::other)?;
    log::info!("using backend at {}", backend.base_url());

    let conf = get_configuration(None).map_err(|e| io::Error::other(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = match &config.bind_addr {
        Some(addr) => addr.clone(),
        None => leptos_options.site_addr.to_string(),
    };

    let backend = Data::new(backend);
    log::info!("listening on http://{}", addr);

    HttpServer::new(move || {
        let site_root = leptos_options.site_root.to_string();
        let options = leptos_options.clone();

        App::new()
            .app_data(backend.clone())
            .app_data(Data::new(leptos_options.clone()))
            .wrap(SecurityHeaders::default())
            .wrap(Logger::default())
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/assets", &site_root))
            .default_service(render_app_to_stream(
                move || shell(options.clone()),
                Method::Get,
            ))
    })
    .bind(&addr)?
    .run()
    .await
}
