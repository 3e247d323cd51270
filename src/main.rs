use std::process;

use blogdeck::config::SiteConfig;
use blogdeck::site::SiteState;
use blogdeck::{boot, build_rocket};

fn main() {
    env_logger::init();

    let config = match SiteConfig::load() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid site config: {}", e);
            process::exit(1);
        }
    };

    // Boot check: create directories, validate the posts source
    boot::run(&config);

    // The collection is fetched once, before the server starts
    let state = SiteState::load(config);

    if let Err(e) = rocket::execute(build_rocket(state).launch()) {
        log::error!("Server failed: {}", e);
        process::exit(1);
    }
}
