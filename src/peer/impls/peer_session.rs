use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{info, warn};
use parking_lot::RwLock;
use tokio::sync::{watch, Mutex};
use crate::common::common::{generate_peer_id, is_safe_filename, shutdown_waiting};
use crate::config::structs::peer_config::PeerConfig;
use crate::peer::errors::SessionError;
use crate::peer::structs::local_share_set::LocalShareSet;
use crate::peer::structs::peer_session::PeerSession;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::tracker::impls::tracker_service::PEER_NOT_REGISTERED;
use crate::transfer::structs::transfer_client::TransferClient;
use crate::transfer::structs::transfer_server::TransferServer;
use crate::transfer::structs::transfer_session::TransferSession;

impl PeerSession {
    /// Brings a peer online: scans its shares, starts its transfer server, registers,
    /// advertises, and starts the heartbeat and rescan loops.
    pub async fn start(config: Arc<PeerConfig>) -> Result<Arc<PeerSession>, SessionError>
    {
        let peer_id = if config.peer_id.is_empty() { generate_peer_id() } else { config.peer_id.clone() };
        tokio::fs::create_dir_all(&config.share_directory).await?;
        tokio::fs::create_dir_all(&config.download_directory).await?;

        let shares = Arc::new(RwLock::new(Arc::new(Self::scan(&config).await?)));
        let bind_address: SocketAddr = config.bind_address.parse()
            .map_err(|_| SessionError::Config(format!("invalid bind address {}", config.bind_address)))?;
        let transfer_server = TransferServer::new(shares.clone(), bind_address, config.max_frame_size, config.handshake_timeout())
            .await
            .map_err(SessionError::Network)?;
        let listen_addr = transfer_server.local_addr().map_err(SessionError::Network)?;

        let (shutdown_sender, rx) = watch::channel(false);
        let server_rx = rx.clone();
        tokio::spawn(async move {
            transfer_server.start(server_rx).await;
        });

        let session = Arc::new(PeerSession {
            peer_id,
            tracker: TrackerClient::from_config(&config),
            transfer: TransferClient::from_config(&config),
            config,
            shares,
            share_sync: Mutex::new(()),
            advertise_pending: AtomicBool::new(false),
            last_search: RwLock::new(BTreeMap::new()),
            listen_addr,
            shutdown_sender,
        });
        info!("[PEER] Peer {} serving {} files on {}", session.peer_id, session.local_files().len(), listen_addr);

        let joined = match session.register().await {
            Ok(()) => session.advertise().await,
            Err(error) => Err(error),
        };
        if let Err(error) = joined {
            let _ = session.shutdown_sender.send(true);
            return Err(error);
        }

        tokio::spawn(session.clone().heartbeat_loop(rx.clone()));
        tokio::spawn(session.clone().rescan_loop(rx));
        Ok(session)
    }

    pub fn peer_id(&self) -> &str
    {
        &self.peer_id
    }

    /// The port announced to the tracker.
    pub fn advertise_port(&self) -> u16
    {
        match self.config.advertise_port {
            0 => self.listen_addr.port(),
            port => port,
        }
    }

    /// Share directory first, so its files win over downloads of the same name.
    pub fn scan_directories(config: &PeerConfig) -> Vec<PathBuf>
    {
        let share_directory = PathBuf::from(&config.share_directory);
        let download_directory = PathBuf::from(&config.download_directory);
        if share_directory == download_directory {
            vec![share_directory]
        } else {
            vec![share_directory, download_directory]
        }
    }

    async fn scan(config: &PeerConfig) -> Result<LocalShareSet, SessionError>
    {
        let directories = Self::scan_directories(config);
        let extensions = config.share_extensions.clone();
        let scanned = tokio::task::spawn_blocking(move || LocalShareSet::scan(&directories, &extensions))
            .await
            .map_err(|error| SessionError::Io(std::io::Error::other(error)))??;
        Ok(scanned)
    }

    pub fn local_files(&self) -> Vec<String>
    {
        self.shares.read().filenames()
    }

    pub async fn register(&self) -> Result<(), SessionError>
    {
        self.tracker.register(&self.peer_id, self.advertise_port()).await?;
        info!("[PEER] Registered {} with tracker {}", self.peer_id, self.tracker.tracker_address);
        Ok(())
    }

    /// Tells the tracker exactly which files this peer hosts right now.
    pub async fn advertise(&self) -> Result<(), SessionError>
    {
        let _sync = self.share_sync.lock().await;
        self.send_shares().await
    }

    async fn send_shares(&self) -> Result<(), SessionError>
    {
        let filenames = self.local_files();
        let count = filenames.len();
        if let Err(error) = self.tracker.share(&self.peer_id, filenames, true).await {
            self.advertise_pending.store(true, Ordering::SeqCst);
            return Err(error);
        }
        self.advertise_pending.store(false, Ordering::SeqCst);
        info!("[PEER] Advertised {count} files");
        Ok(())
    }

    /// Rescans the share directories and swaps in the new set. Returns whether it changed.
    pub async fn refresh_shares(&self) -> Result<bool, SessionError>
    {
        let _sync = self.share_sync.lock().await;
        self.swap_shares().await
    }

    async fn swap_shares(&self) -> Result<bool, SessionError>
    {
        let scanned = Arc::new(Self::scan(&self.config).await?);
        let mut shares = self.shares.write();
        let changed = **shares != *scanned;
        *shares = scanned;
        Ok(changed)
    }

    /// Rescans and re-advertises if the share set changed or the last advertise failed.
    pub async fn rescan(&self) -> Result<bool, SessionError>
    {
        let _sync = self.share_sync.lock().await;
        let changed = self.swap_shares().await?;
        if changed || self.advertise_pending.load(Ordering::SeqCst) {
            self.send_shares().await?;
        }
        Ok(changed)
    }

    /// Refreshes liveness, registering again if the tracker has expired this peer.
    pub async fn heartbeat(&self) -> Result<(), SessionError>
    {
        let response = self.tracker.heartbeat(&self.peer_id).await?;
        if response.is_success() {
            return Ok(());
        }
        if response.message_or_default() == PEER_NOT_REGISTERED {
            info!("[PEER] Tracker no longer knows {}, registering again", self.peer_id);
            self.register().await?;
            return self.advertise().await;
        }
        Err(SessionError::Rejected {
            command: "heartbeat",
            message: response.message_or_default().to_string(),
        })
    }

    /// Searches the tracker and remembers the result for [`download`](Self::download).
    pub async fn search(&self, keyword: &str) -> Result<BTreeMap<String, Vec<PeerAddress>>, SessionError>
    {
        let results = self.tracker.search(keyword).await?;
        *self.last_search.write() = results.clone();
        Ok(results)
    }

    pub async fn list_peers(&self) -> Result<Vec<(String, PeerAddress)>, SessionError>
    {
        self.tracker.list_peers().await
    }

    /// Downloads `filename` from the first address the last search returned for it.
    pub async fn download(&self, filename: &str) -> Result<TransferSession, SessionError>
    {
        let address = self.last_search.read()
            .get(filename)
            .and_then(|addresses| addresses.first().copied())
            .ok_or_else(|| SessionError::NotInSearchResults(filename.to_string()))?;
        self.download_from(address, filename).await
    }

    /// Downloads `filename` from `address`, then advertises it so other peers can fetch
    /// it from here. A failed download is never advertised. Once the file is complete on
    /// disk the download counts as done; an advertise failure is only logged and the
    /// next rescan publishes it.
    pub async fn download_from(&self, address: PeerAddress, filename: &str) -> Result<TransferSession, SessionError>
    {
        let destination = PathBuf::from(&self.config.download_directory);
        let session = self.transfer.download(address.socket_addr(), filename, &destination).await?;
        let _sync = self.share_sync.lock().await;
        let published = match self.swap_shares().await {
            Ok(_) => self.send_shares().await,
            Err(error) => Err(error),
        };
        if let Err(error) = published {
            warn!("[PEER] Downloaded {filename} but could not advertise it yet: {error}");
        }
        Ok(session)
    }

    /// Copies a file into the share directory and advertises it.
    pub async fn add_local_file(&self, source: &Path) -> Result<String, SessionError>
    {
        let filename = source.file_name()
            .and_then(|filename| filename.to_str())
            .filter(|filename| is_safe_filename(filename) && !filename.starts_with('.'))
            .ok_or_else(|| SessionError::InvalidFilename(source.display().to_string()))?
            .to_string();
        let target = Path::new(&self.config.share_directory).join(&filename);
        tokio::fs::copy(source, &target).await?;
        info!("[PEER] Added {filename} to the share directory");
        self.rescan().await?;
        Ok(filename)
    }

    async fn heartbeat_loop(self: Arc<Self>, mut rx: watch::Receiver<bool>)
    {
        let interval = self.config.heartbeat_interval();
        loop {
            if shutdown_waiting(interval, &mut rx).await {
                break;
            }
            if let Err(error) = self.heartbeat().await {
                warn!("[PEER] Heartbeat failed: {error}");
            }
        }
    }

    async fn rescan_loop(self: Arc<Self>, mut rx: watch::Receiver<bool>)
    {
        let Some(interval) = self.config.rescan_interval() else {
            return;
        };
        loop {
            if shutdown_waiting(interval, &mut rx).await {
                break;
            }
            if let Err(error) = self.rescan().await {
                warn!("[PEER] Rescan failed: {error}");
            }
        }
    }

    /// Unregisters (best effort) and stops the transfer server and background loops.
    pub async fn shutdown(&self)
    {
        if let Err(error) = self.tracker.unregister(&self.peer_id).await {
            warn!("[PEER] Could not unregister {}: {error}", self.peer_id);
        }
        let _ = self.shutdown_sender.send(true);
        info!("[PEER] Peer {} stopped", self.peer_id);
    }
}
