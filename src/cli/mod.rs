// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the API server to
    #[arg(long)]
    pub address: Option<String>,

    /// API server port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Serve OpenAPI docs, Swagger UI and Redoc
    #[arg(long)]
    pub docs: bool,

    /// Command to execute (runs the API server when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_flags() {
        let args = Args::try_parse_from(["passgen", "--address", "127.0.0.1", "--port", "9000", "--docs"]).unwrap();
        assert_eq!(args.address.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
        assert!(args.docs);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_generate_subcommand() {
        let args = Args::try_parse_from(["passgen", "generate", "--length", "20", "--has-symbol", "--count", "3"]).unwrap();
        match args.command {
            Some(CliCommand::Generate { length, has_symbol, count }) => {
                assert_eq!(length, Some(20));
                assert!(has_symbol);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_length_parses_for_validation() {
        let args = Args::try_parse_from(["passgen", "generate", "--length=-1"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Generate { length: Some(-1), .. })));
    }
}
