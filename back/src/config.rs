use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

use crate::validation::DueDateRule;

#[derive(Debug, Parser)]
#[command(about = "In-memory todo list over HTTP")]
pub struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub addr: SocketAddr,

    /// Which side of the current time a new todo's due date must be on.
    #[arg(long, value_enum, default_value_t = DueDateRule::MustBePast)]
    pub due_date_rule: DueDateRule,

    /// Start with an empty list instead of the sample todos.
    #[arg(long)]
    pub empty: bool,

    /// PEM certificate; serves TLS together with `--key`.
    #[arg(long, requires = "key")]
    pub cert: Option<PathBuf>,

    /// PEM private key for `--cert`.
    #[arg(long, requires = "cert")]
    pub key: Option<PathBuf>,
}
