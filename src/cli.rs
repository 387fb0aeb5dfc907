//! CLI argument definitions for the admin server binary.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "starwars-admin", about = "Star Wars characters admin service")]
pub struct Cli {
    /// Host address to bind to
    #[clap(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind to
    #[clap(long, default_value = "8000")]
    pub port: u16,

    /// Path to the SQLite database file (defaults to the platform data dir)
    #[clap(long)]
    pub database: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["starwars-admin"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 8000);
        assert!(cli.database.is_none());
    }

    #[test]
    fn test_explicit_args() {
        let cli = Cli::parse_from([
            "starwars-admin",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--database",
            "/tmp/chars.db",
        ]);
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/chars.db")));
    }
}
