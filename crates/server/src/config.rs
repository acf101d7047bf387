// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Server configuration from command-line arguments and the environment.
//!
//! # Environment Variables
//!
//! - `ENVIOS_DATABASE` - `SQLite` file path (omitted: in-memory)
//! - `DATABASE_URL` - `MySQL`/`MariaDB` URL, takes precedence over `ENVIOS_DATABASE`
//! - `ENVIOS_BIND` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)
//! - `ENVIOS_TIMEZONE` - Business timezone (default: `America/Argentina/Mendoza`)
//! - `ENVIOS_BRANCHES` - Comma-separated branch catalog (default: `Guaymallén,Maipú`)

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use envios_domain::{DomainError, Tz, parse_timezone};
use thiserror::Error;

/// Envios Server - HTTP server for shipment and transfer tracking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "ENVIOS_DATABASE")]
    pub database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, env = "ENVIOS_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// IANA timezone used to decide "today" and overdue status
    #[arg(long, env = "ENVIOS_TIMEZONE", default_value = "America/Argentina/Mendoza")]
    pub timezone: String,

    /// Branch catalog offered by the forms and accepted on save
    #[arg(
        long = "branch",
        env = "ENVIOS_BRANCHES",
        value_delimiter = ',',
        default_value = "Guaymallén,Maipú"
    )]
    pub branches: Vec<String>,
}

/// Configuration errors that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address {addr}: {source}")]
    InvalidBindAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    InvalidTimezone(#[from] DomainError),
    #[error("Branch names must not be empty")]
    EmptyBranch,
}

/// Which backend the record store runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    InMemory,
    SqliteFile(String),
    Mysql(String),
}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database: DatabaseTarget,
    pub addr: SocketAddr,
    pub timezone: Tz,
    pub branches: Vec<String>,
}

impl ServerConfig {
    /// Validates parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address or timezone is invalid, or a
    /// branch name is blank.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let host: IpAddr = args
            .bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                addr: args.bind.clone(),
                source,
            })?;

        let timezone: Tz = parse_timezone(&args.timezone)?;

        let branches: Vec<String> = args
            .branches
            .iter()
            .map(|b| b.trim().to_string())
            .collect();
        if branches.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyBranch);
        }

        let database = match (args.mysql_url, args.database) {
            (Some(url), _) => DatabaseTarget::Mysql(url),
            (None, Some(path)) => DatabaseTarget::SqliteFile(path),
            (None, None) => DatabaseTarget::InMemory,
        };

        Ok(Self {
            database,
            addr: SocketAddr::new(host, args.port),
            timezone,
            branches,
        })
    }
}
