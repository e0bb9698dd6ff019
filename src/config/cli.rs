use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the scraper configuration file (site URL and selectors)
    #[arg(long, global = true, default_value = "scraper_config.json")]
    pub config_file: PathBuf,

    /// Database connection string
    #[arg(
        long,
        global = true,
        env = "DATABASE_URL",
        default_value = "sqlite://hotels.db"
    )]
    pub database_url: String,

    /// Log level (error, warn, info, debug, trace), overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8000")]
        bind: SocketAddr,
    },
    /// Scrape a single hotel and print it as JSON
    Scrape {
        /// Free-text hotel name to search for
        hotel_name: String,

        /// Persist the scraped hotel
        #[arg(long)]
        save: bool,
    },
    /// List name and review of every stored hotel
    List,
    /// Print one stored hotel
    Get { id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scrape_with_save_flag() {
        let args = Args::parse_from(["hotelscrape", "scrape", "Hotel Arts Barcelona", "--save"]);
        match args.command {
            Command::Scrape { hotel_name, save } => {
                assert_eq!(hotel_name, "Hotel Arts Barcelona");
                assert!(save);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(args.config_file, PathBuf::from("scraper_config.json"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::parse_from([
            "hotelscrape",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--database-url",
            "sqlite://other.db",
        ]);
        assert_eq!(args.database_url, "sqlite://other.db");
        assert!(matches!(args.command, Command::Serve { bind } if bind.port() == 9000));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
