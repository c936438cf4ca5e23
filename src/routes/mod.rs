// Route exports
pub mod recommend;

use actix_files::Files;
use actix_web::web;
use std::path::Path;

pub use recommend::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(recommend::configure);
}

/// Static front-end bundle mounted at `/`
///
/// Must be registered after the API routes since it matches every path.
pub fn static_files<P: AsRef<Path>>(dir: P, index: &str) -> Files {
    Files::new("/", dir.as_ref()).index_file(index)
}
