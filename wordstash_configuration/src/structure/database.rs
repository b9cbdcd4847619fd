use miette::Result;
use serde::Deserialize;

use crate::traits::ResolvableConfiguration;


fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5432
}


#[derive(Deserialize, Debug, Clone)]
pub(super) struct UnresolvedDatabaseConfiguration {
    #[serde(default = "default_host")]
    host: String,

    #[serde(default = "default_port")]
    port: u16,

    username: String,

    password: Option<String>,

    database_name: String,
}

/// PostgreSQL connection settings. Host and port default to a local
/// server on the standard port when omitted from the configuration file.
#[derive(Debug, Clone)]
pub struct DatabaseConfiguration {
    pub host: String,

    pub port: u16,

    pub username: String,

    /// Omitted for e.g. trust-authenticated local development databases.
    pub password: Option<String>,

    pub database_name: String,
}

impl ResolvableConfiguration for UnresolvedDatabaseConfiguration {
    type Resolved = DatabaseConfiguration;

    fn resolve(self) -> Result<Self::Resolved> {
        Ok(Self::Resolved {
            host: self.host,
            port: self.port,
            username: self.username,
            password: self.password,
            database_name: self.database_name,
        })
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn host_and_port_fall_back_to_a_local_server() {
        let unresolved: UnresolvedDatabaseConfiguration = toml::from_str(
            "username = \"wordstash\"\n\
             database_name = \"wordstash\"\n",
        )
        .unwrap();

        let resolved = unresolved.resolve().unwrap();

        assert_eq!(resolved.host, "127.0.0.1");
        assert_eq!(resolved.port, 5432);
        assert_eq!(resolved.password, None);
    }

    #[test]
    fn explicit_host_and_port_are_kept() {
        let unresolved: UnresolvedDatabaseConfiguration = toml::from_str(
            "host = \"db.internal\"\n\
             port = 15432\n\
             username = \"wordstash\"\n\
             password = \"hunter2\"\n\
             database_name = \"wordstash\"\n",
        )
        .unwrap();

        let resolved = unresolved.resolve().unwrap();

        assert_eq!(resolved.host, "db.internal");
        assert_eq!(resolved.port, 15432);
        assert_eq!(resolved.password.as_deref(), Some("hunter2"));
    }
}
