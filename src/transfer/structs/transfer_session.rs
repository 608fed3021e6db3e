/// Progress of one download. Lives only as long as its connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSession {
    pub filename: String,
    pub expected_size: u64,
    pub bytes_transferred: u64,
}
