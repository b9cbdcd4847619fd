use miette::Result;
use serde::Deserialize;

use crate::traits::ResolvableConfiguration;


pub(super) type UnresolvedHttpConfiguration = HttpConfiguration;

/// Actix HTTP server-related configuration.
#[derive(Deserialize, Debug, Clone)]
pub struct HttpConfiguration {
    /// Host to bind the HTTP server to.
    pub host: String,

    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl ResolvableConfiguration for UnresolvedHttpConfiguration {
    type Resolved = HttpConfiguration;

    fn resolve(self) -> Result<Self::Resolved> {
        Ok(self)
    }
}
