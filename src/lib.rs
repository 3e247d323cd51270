#[macro_use]
extern crate rocket;

use rocket::fs::{FileServer, Options};
use rocket::response::content::RawHtml;
use rocket::{Build, Request, Rocket};

pub mod blog;
pub mod boot;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod nav;
pub mod notice;
pub mod render;
pub mod routes;
pub mod share;
pub mod site;


use config::SiteConfig;
use forms::Inbox;
use site::SiteState;

#[catch(404)]
fn not_found(req: &Request<'_>) -> RawHtml<String> {
    let html = match req.rocket().state::<SiteState>() {
        Some(state) => render::not_found_page(&state.config),
        None => render::not_found_page(&SiteConfig::default()),
    };
    RawHtml(html)
}

#[catch(500)]
fn server_error(req: &Request<'_>) -> RawHtml<String> {
    let html = match req.rocket().state::<SiteState>() {
        Some(state) => render::server_error_page(&state.config),
        None => render::server_error_page(&SiteConfig::default()),
    };
    RawHtml(html)
}

/// Assemble the application around an already-loaded site state.
pub fn build_rocket(state: SiteState) -> Rocket<Build> {
    let static_dir = state.config.static_dir.clone();

    rocket::build()
        .manage(state)
        .manage(Inbox::new())
        .mount("/static", FileServer::new(static_dir, Options::Index | Options::Missing))
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}
