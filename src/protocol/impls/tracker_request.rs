use serde_json::Value;
use crate::protocol::enums::tracker_request::{TrackerRequest, TRACKER_COMMANDS};
use crate::protocol::errors::ProtocolError;

impl TrackerRequest {
    /// Decodes a frame payload, telling an unknown command apart from a malformed one.
    pub fn parse(payload: &[u8]) -> Result<TrackerRequest, ProtocolError> {
        let value: Value = serde_json::from_slice(payload).map_err(|error| ProtocolError::Malformed(error.to_string()))?;
        let command = match value.get("command") {
            Some(Value::String(command)) => command.clone(),
            Some(_) => return Err(ProtocolError::Malformed(String::from("command must be a string"))),
            None => return Err(ProtocolError::Malformed(String::from("missing command"))),
        };
        if !TRACKER_COMMANDS.contains(&command.as_str()) {
            return Err(ProtocolError::UnknownCommand(command));
        }
        serde_json::from_value(value).map_err(|error| ProtocolError::Malformed(error.to_string()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TrackerRequest::Register { .. } => "register",
            TrackerRequest::Share { .. } => "share",
            TrackerRequest::Search { .. } => "search",
            TrackerRequest::ListPeers => "list_peers",
            TrackerRequest::ListFiles => "list_files",
            TrackerRequest::Heartbeat { .. } => "heartbeat",
            TrackerRequest::Unregister { .. } => "unregister",
        }
    }
}
