use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use p2p_share::api::api::api_service;
use p2p_share::api::structs::api_service_data::ApiServiceData;
use p2p_share::common::common::setup_logging;
use p2p_share::config::structs::configuration::Configuration;
use p2p_share::peer::errors::SessionError;
use p2p_share::peer::structs::peer_session::PeerSession;
use p2p_share::stats::enums::stats_event::StatsEvent;
use p2p_share::structs::{Cli, Command};
use p2p_share::tracker::structs::tracker_server::TrackerServer;
use p2p_share::tracker::structs::tracker_service::TrackerService;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry.enabled {
        _sentry_guard = sentry::init((config.sentry.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry.debug,
            sample_rate: config.sentry.sample_rate,
            max_breadcrumbs: config.sentry.max_breadcrumbs,
            attach_stacktrace: config.sentry.attach_stacktrace,
            send_default_pii: config.sentry.send_default_pii,
            traces_sample_rate: config.sentry.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match args.command.unwrap_or(Command::Tracker) {
        Command::Tracker => runtime.block_on(run_tracker(config)),
        Command::Peer => runtime.block_on(run_peer(config)),
        Command::Search { keyword } => runtime.block_on(run_search(config, keyword)),
        Command::Download { filename } => runtime.block_on(run_download(config, filename)),
    }
}

async fn run_tracker(config: Arc<Configuration>) -> std::io::Result<()>
{
    let service = Arc::new(TrackerService::new(config.clone()));
    let tokio_shutdown = match Shutdown::new() {
        Ok(shutdown) => shutdown,
        Err(_) => {
            error!("[BOOT] Unable to install the shutdown handler");
            exit(1);
        }
    };

    let deadlocks_handler = tokio_shutdown.clone();
    tokio::spawn(async move {
        info!("[BOOT] Starting thread for deadlocks...");
        let mut interval = tokio::time::interval(Duration::from_secs(30));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            info!("[DEADLOCK] #{i}");
                            for t in threads {
                                info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                info!("[DEADLOCK] {:#?}", t.backtrace());
                                sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                            }
                        }
                    }
                }
                _ = deadlocks_handler.handle() => {
                    info!("[BOOT] Shutting down thread for deadlocks...");
                    return;
                }
            }
        }
    });

    let mut api_futures = Vec::new();
    for api_server_object in &config.api_server {
        if api_server_object.enabled {
            let address: SocketAddr = match api_server_object.bind_address.parse() {
                Ok(address) => address,
                Err(_) => {
                    error!("[BOOT] Invalid API bind address {}", api_server_object.bind_address);
                    exit(1);
                }
            };
            let data = Arc::new(ApiServiceData {
                tracker_service: service.clone(),
                api_server_config: Arc::new(api_server_object.clone()),
            });
            match api_service(address, data) {
                Ok((handle, future)) => api_futures.push((handle, future)),
                Err(error) => {
                    error!("[BOOT] Unable to bind API server on {address}: {error}");
                    exit(1);
                }
            }
        }
    }
    let (api_handles, api_servers): (Vec<_>, Vec<_>) = api_futures.into_iter().unzip();
    if !api_servers.is_empty() {
        tokio::spawn(async move {
            let _ = try_join_all(api_servers).await;
        });
    }

    let address: SocketAddr = match config.tracker.bind_address.parse() {
        Ok(address) => address,
        Err(_) => {
            error!("[BOOT] Invalid tracker bind address {}", config.tracker.bind_address);
            exit(1);
        }
    };
    let server = match TrackerServer::new(service.clone(), address).await {
        Ok(server) => server,
        Err(error) => {
            error!("[BOOT] Unable to bind tracker on {address}: {error}");
            exit(1);
        }
    };

    let (tracker_tx, tracker_rx) = tokio::sync::watch::channel(false);
    let server_rx = tracker_rx.clone();
    let server_future = tokio::spawn(async move {
        server.start(server_rx).await;
    });

    info!("[BOOT] Starting thread for the liveness sweep...");
    let sweep_future = tokio::spawn(service.clone().sweep_loop(tracker_rx));

    let stats_handler = tokio_shutdown.clone();
    let stats_service = service.clone();
    let console_interval = config.log_console_interval;
    if console_interval > 0 {
        info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        stats_service.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp());
                        let stats = stats_service.get_stats();
                        info!(
                            "[STATS] Peers: {} - Files: {} | Conn: {} - Req: {} - Bad: {} - API: {} | Reg: {} - Unreg: {} - Expired: {}",
                            stats.peers, stats.files,
                            stats.connections_handled, stats.requests_handled, stats.bad_requests, stats.api_handled,
                            stats.peers_registered, stats.peers_unregistered, stats.peers_expired
                        );
                    }
                    _ = stats_handler.handle() => {
                        info!("[BOOT] Shutting down thread for console updates...");
                        return;
                    }
                }
            }
        });
    }

    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown request received, shutting down...");

    let _ = tracker_tx.send(true);
    for task in [server_future, sweep_future] {
        if let Err(error) = task.await {
            sentry::capture_error(&error);
            error!("Errors happened on shutting down the tracker: {error}");
        }
    }
    for handle in api_handles {
        handle.stop(true).await;
    }

    tokio_shutdown.handle().await;
    tokio::time::sleep(Duration::from_secs(1)).await;
    info!("Server shutting down completed");
    Ok(())
}

async fn start_peer(config: &Configuration) -> Option<Arc<PeerSession>>
{
    match PeerSession::start(Arc::new(config.peer.clone())).await {
        Ok(session) => Some(session),
        Err(error) => {
            error!("[PEER] Unable to join the network: {error}");
            None
        }
    }
}

async fn run_peer(config: Arc<Configuration>) -> std::io::Result<()>
{
    let Some(session) = start_peer(&config).await else {
        exit(1);
    };

    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown request received, shutting down...");
    session.shutdown().await;
    Ok(())
}

async fn run_search(config: Arc<Configuration>, keyword: String) -> std::io::Result<()>
{
    let Some(session) = start_peer(&config).await else {
        exit(1);
    };

    let result = session.search(&keyword).await;
    session.shutdown().await;
    match result {
        Ok(results) if results.is_empty() => {
            println!("No files matching '{keyword}'");
            Ok(())
        }
        Ok(results) => {
            for (filename, addresses) in results {
                let hosters = addresses.iter().map(|address| address.to_string()).collect::<Vec<String>>().join(", ");
                println!("{filename}\t{hosters}");
            }
            Ok(())
        }
        Err(error) => {
            error!("[PEER] Search failed: {error}");
            exit(1);
        }
    }
}

async fn run_download(config: Arc<Configuration>, filename: String) -> std::io::Result<()>
{
    let Some(session) = start_peer(&config).await else {
        exit(1);
    };

    let result = match session.search(&filename).await {
        Ok(_) => session.download(&filename).await,
        Err(error) => Err(error),
    };
    session.shutdown().await;
    match result {
        Ok(transfer) => {
            println!("Downloaded {} ({} bytes)", transfer.filename, transfer.bytes_transferred);
            Ok(())
        }
        Err(SessionError::NotInSearchResults(_)) => {
            error!("[PEER] Nobody is sharing {filename}");
            exit(1);
        }
        Err(error) => {
            error!("[PEER] Download of {filename} failed: {error}");
            exit(1);
        }
    }
}
