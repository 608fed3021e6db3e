use std::net::SocketAddr;
use std::sync::LazyLock;
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use regex::Regex;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tokio::sync::watch;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;

pub const PEER_ID_PATTERN: &str = r"^[A-Za-z0-9_.\-]{1,64}$";
pub const MAX_FILENAME_LENGTH: usize = 255;

static PEER_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PEER_ID_PATTERN).expect("peer id pattern is a valid regex")
});

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, ConfigurationError>
{
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(ConfigurationError::ValidationError(format!("unknown log level '{level}'")))
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Ok(level) => level,
        Err(_) => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

/// Binds a TCP listener with `SO_REUSEADDR` set, so a restarted tracker or peer can
/// take its port back while old connections sit in `TIME_WAIT`.
///
/// Must be called from within a Tokio runtime.
pub fn bind_tcp_listener(bind_address: SocketAddr) -> std::io::Result<TcpListener>
{
    let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    socket.set_tcp_nodelay(true)?;
    socket.bind(&bind_address.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Sleeps for `timeout`, returning early with `true` when a shutdown is signalled.
///
/// A dropped sender counts as a shutdown.
pub async fn shutdown_waiting(timeout: Duration, shutdown: &mut watch::Receiver<bool>) -> bool
{
    if *shutdown.borrow() {
        return true;
    }
    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        changed = shutdown.changed() => {
            match changed {
                Ok(_) => *shutdown.borrow(),
                Err(_) => true
            }
        }
    }
}

/// A filename is shareable when it is exactly one path component.
pub fn is_safe_filename(filename: &str) -> bool
{
    !filename.is_empty()
        && filename.len() <= MAX_FILENAME_LENGTH
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
}

pub fn is_valid_peer_id(peer_id: &str) -> bool
{
    PEER_ID_REGEX.is_match(peer_id)
}

/// Short random identifier, stable for the lifetime of the process that generated it.
pub fn generate_peer_id() -> String
{
    let mut peer_id = uuid::Uuid::new_v4().simple().to_string();
    peer_id.truncate(8);
    peer_id
}
