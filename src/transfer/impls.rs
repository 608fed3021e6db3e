pub mod transfer_server;
pub mod transfer_client;
pub mod transfer_session;
