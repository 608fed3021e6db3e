/// The swappable share set handle used by the session and the transfer server.
pub mod shared_share_set;
