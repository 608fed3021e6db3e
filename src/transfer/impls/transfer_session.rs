use crate::transfer::structs::transfer_session::TransferSession;

impl TransferSession {
    pub fn new(filename: &str, expected_size: u64) -> TransferSession {
        TransferSession {
            filename: filename.to_string(),
            expected_size,
            bytes_transferred: 0,
        }
    }

    pub fn record(&mut self, bytes: u64) {
        self.bytes_transferred += bytes;
    }

    pub fn remaining(&self) -> u64 {
        self.expected_size.saturating_sub(self.bytes_transferred)
    }

    pub fn is_complete(&self) -> bool {
        self.bytes_transferred >= self.expected_size
    }
}
