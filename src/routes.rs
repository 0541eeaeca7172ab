use crate::{
    api::{attendance, employee, leave, roster, settings, shift},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    // Check-in/check-out are the spammable employee-facing writes
    let attendance_limiter = Arc::new(build_limiter(config.rate_attendance_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            .service(web::resource("/shifts").route(web::get().to(shift::list_shifts)))
            .service(
                web::scope("/roster")
                    // /roster
                    .service(web::resource("").route(web::get().to(roster::get_roster)))
                    // /roster/override
                    .service(web::resource("/override").route(web::put().to(roster::set_override))),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .wrap(attendance_limiter)
                            .route(web::put().to(attendance::check_out))
                            .route(web::post().to(attendance::check_in))
                            .route(web::get().to(attendance::list_attendance)),
                    ),
            )
            .service(
                web::scope("/leave")
                    // /leave/categories
                    .service(
                        web::resource("/categories").route(web::get().to(leave::leave_categories)),
                    )
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::leave_list))
                            .route(web::post().to(leave::create_leave)),
                    )
                    // /leave/{id}
                    .service(web::resource("/{id}").route(web::get().to(leave::get_leave)))
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve").route(web::put().to(leave::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject").route(web::put().to(leave::reject_leave)),
                    ),
            )
            .service(
                web::scope("/employee")
                    // /employee
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employee/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/settings").service(
                    web::resource("/geofence")
                        .route(web::get().to(settings::get_geofence))
                        .route(web::put().to(settings::update_geofence)),
                ),
            ),
    );
}
