mod clinic;
mod config;
mod error;
mod handlers;
mod models;
mod routes;

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::clinic::Clinic;
use crate::config::Config;
use crate::models::doctor::{DoctorDirectory, load_doctor_directory};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional, real environment variables still apply
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let directory = match &config.doctors_file {
        Some(path) => load_doctor_directory(path)?,
        None => DoctorDirectory::default(),
    };

    info!(
        host = %config.host,
        port = config.port,
        doctors = directory.len(),
        "Starting clinic backend"
    );

    let clinic = web::Data::new(Clinic::new(directory));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(clinic.clone())
            .configure(routes::init)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
