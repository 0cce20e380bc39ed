//! CLI module for the member registration service

pub mod serve;

use clap::{Args, Parser, Subcommand};

/// Member registration - three-step sign-up wizard over HTTP
#[derive(Parser)]
#[command(name = "member-registration")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Message bundle (TOML) layered over the built-in error messages
    #[arg(long)]
    pub messages: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["member-registration", "serve", "--port", "9000"]);
        let Command::Serve(args) = cli.command;

        assert_eq!(args.port, Some(9000));
        assert!(args.messages.is_none());
    }

    #[test]
    fn test_parse_serve_with_messages() {
        let cli = Cli::parse_from(["member-registration", "serve", "--messages", "messages.toml"]);
        let Command::Serve(args) = cli.command;

        assert_eq!(args.messages.as_deref(), Some("messages.toml"));
    }
}
