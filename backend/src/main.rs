mod config;
#[cfg(test)]
mod fixtures;
mod services;
mod store;

use crate::config::Config;
use crate::store::CityStore;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;
    let store = CityStore::new(config.database_path.clone());
    store.create_schema().await.map_err(io::Error::other)?;

    let (host, port) = config.bind_address();
    info!("Server running at http://{}:{}", host, port);

    let app_store = store.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_store.clone()))
            .configure(services::configure)
    })
        .bind((host, port))?
        .run()
        .await?;

    info!("Server stopped");
    if config.drop_schema_on_exit {
        store.drop_schema().await.map_err(io::Error::other)?;
    }
    Ok(())
}
