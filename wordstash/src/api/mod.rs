//! API definitions for the Wordstash backend.
//!
//! # Development note
//!
//! We use "" instead of "/" in several places (e.g. `#[get("")]`, etc.)
//! because this allows the user to request e.g. `GET /vocab/list` OR
//! `GET /vocab/list/` and get the correct endpoint both times.
//!
//! For more information, see `actix_web::middleware::NormalizePath` (trim mode).

use actix_web::{web, Scope};

pub mod errors;
pub mod ping;
pub mod traits;
pub mod vocab;


/// Router for the entire public API.
///
/// Lives at the server root and is made up of `/ping` and `/vocab`
/// and its sub-routes.
#[rustfmt::skip]
pub fn api_router() -> Scope {
    web::scope("")
        .service(ping::ping)
        .service(vocab::vocab_router())
}
