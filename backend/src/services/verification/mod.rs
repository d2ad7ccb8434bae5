//! Public order lookup by verification token. This is the only endpoint the
//! client-facing page uses; it never exposes internal notes.

mod get;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/api/verificar";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH).route("/{token}", web::get().to(get::process))
}
