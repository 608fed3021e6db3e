pub mod tracker_request;
pub mod response_status;
pub mod transfer_request;
pub mod transfer_reply;
