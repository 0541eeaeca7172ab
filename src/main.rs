use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;
use std::sync::Arc;

mod api;
mod config;
mod core;
mod docs;
mod model;
mod routes;
mod state;
mod store;

use config::Config;
use state::AppState;
use store::MemoryStore;

use crate::docs::ApiDoc;
use crate::model::employee::Employee;
use crate::model::shift::ShiftGroup;
use chrono::NaiveDate;
use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Presensi API"
}

/// Seed the original demo directory so a fresh instance can be exercised
/// without a registration flow.
fn seed_demo_employees(state: &AppState) -> anyhow::Result<()> {
    let demo = [
        ("ADM001", "Admin Utama", "admin@presensi.com", "HR & GA", "HR Manager", ShiftGroup::Reguler, (2020, 1, 15)),
        ("MGR022", "Budi Manager", "manager@presensi.com", "Sales", "Area Manager", ShiftGroup::Daytime, (2021, 6, 10)),
        ("STF089", "Siti Karyawan", "siti@presensi.com", "Marketing", "Sales Officer", ShiftGroup::ShiftA, (2022, 3, 22)),
    ];
    let count = demo.len();

    for (nid, name, email, division, position, shift_group, (y, m, d)) in demo {
        let join_date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow::anyhow!("invalid join date for {nid}"))?;
        state.employees.insert(Employee {
            id: uuid::Uuid::new_v4().to_string(),
            nid: nid.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            division: division.to_string(),
            position: position.to_string(),
            shift_group,
            join_date,
        });
    }

    info!("Seeded {} demo employees", count);
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let store = Arc::new(MemoryStore::new(config.office_geofence()));
    let state = AppState {
        overrides: store.clone(),
        attendance: store.clone(),
        employees: store.clone(),
        leaves: store.clone(),
        settings: store,
    };

    if config.seed_demo_data {
        if let Err(e) = seed_demo_employees(&state) {
            warn!(error = %e, "Failed to seed demo employees");
        }
    }

    // 👇 clone what you need BEFORE moving config
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(state.clone()))
            .service(index)
            .configure(|cfg| routes::configure(cfg, config.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
