use actix_web::get;
use serde::Serialize;

use crate::api::errors::{EndpointResponseBuilder, EndpointResult};



#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct PingResponse {
    pub ok: bool,
}


/// Ping the server.
#[get("/ping")]
pub async fn ping() -> EndpointResult {
    EndpointResponseBuilder::ok()
        .with_json_body(PingResponse { ok: true })
        .build()
}
