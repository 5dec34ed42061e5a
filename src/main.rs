mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_geocode;
mod manager_nws;
mod render;
mod weather_view;

use std::path::PathBuf;
use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::handlers::{icon_files, index, weather_json};
use crate::initialization::config;
use crate::manager_geocode::Nominatim;
use crate::manager_nws::{user_agent, NWS};
use crate::weather_view::icons::IconTable;

pub struct AppState {
    pub nws: NWS,
    pub icons: IconTable,
    pub refresh_minutes: u32,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let icons = IconTable::load(config.general.icon_table.as_deref())?;
    info!("icon table loaded with {} conditions", icons.len());

    let geocoder = Nominatim::new(&config.geocoding, &user_agent(&config.nws.contact))?;
    let (lat, long) = geocoder
        .postal_code(&config.location.postal_code, &config.location.country)
        .await?;

    let state = web::Data::new(AppState {
        nws: NWS::new(&config.nws, lat, long)?,
        icons,
        refresh_minutes: config.web_server.refresh_minutes,
    });
    let static_dir = PathBuf::from(&config.web_server.static_dir);

    info!("serving weather for {} on {}:{}",
          config.location.postal_code, config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(index)
            .service(weather_json)
            .service(icon_files(&static_dir))
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
