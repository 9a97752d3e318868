//! Backend entry-point: loads settings, opens the data directory and serves
//! the guest desk API.

mod server;

use std::io;

use actix_web::web;
use cap_std::{ambient_authority, fs::Dir};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use guest_desk::inbound::http::health::HealthState;
use guest_desk::inbound::http::session_config::{BuildMode, session_settings_from_env};
use guest_desk::settings::AppSettings;
use server::{ServerConfig, StorageConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;

    let data_dir = settings.data_dir();
    if settings.create_data_dir {
        Dir::create_ambient_dir_all(data_dir, ambient_authority())?;
    }
    let dir = Dir::open_ambient_dir(data_dir, ambient_authority())?;
    let storage = StorageConfig::new(
        dir,
        settings.users_file(),
        settings.guests_file(),
        settings.banner_file(),
    );

    let config = ServerConfig::new(session.key, session.cookie_secure, bind_addr, storage);
    info!(
        bind_addr = %config.bind_addr(),
        data_dir = %data_dir.display(),
        "starting guest desk"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
