use std::net::SocketAddr;

use getopts::Options;

pub const ADDR_VAR: &str = "CLUB_SITE_ADDR";

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Serve(SocketAddr),
    Render,
    Ics,
    Help(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Options(#[from] getopts::Fail),
    #[error("Provided value for option 'address' is invalid: {0}")]
    Address(#[from] std::net::AddrParseError),
    #[error("Options '--render' and '--ics' are mutually exclusive")]
    Conflict,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: $CLUB_SITE_ADDR or 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );
    opts.optflag("r", "render", "Print the page for the current time and exit");
    opts.optflag("i", "ics", "Print the calendar invite and exit");
    opts
}

/// `env_addr` is the value of [`ADDR_VAR`], used when `--address` is absent.
pub fn parse(args: &[String], env_addr: Option<String>) -> Result<Mode, CliError> {
    let opts = opts();
    let matches = opts.parse(args)?;

    if matches.opt_present("help") {
        return Ok(Mode::Help(
            opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))),
        ));
    }

    match (matches.opt_present("render"), matches.opt_present("ics")) {
        (true, true) => return Err(CliError::Conflict),
        (true, false) => return Ok(Mode::Render),
        (false, true) => return Ok(Mode::Ics),
        (false, false) => {}
    }

    let address = match matches.opt_str("address").or(env_addr) {
        Some(value) => value.parse()?,
        None => SocketAddr::from(([127, 0, 0, 1], 8080)),
    };

    Ok(Mode::Serve(address))
}
