#[cfg(test)]
mod protocol_tests {
    mod framing_tests {
        use tokio::io::AsyncWriteExt;
        use crate::protocol::errors::ProtocolError;
        use crate::protocol::protocol::{read_frame, read_message, write_frame, write_message, DEFAULT_MAX_FRAME_SIZE};
        use crate::protocol::enums::transfer_reply::TransferReply;

        #[tokio::test]
        async fn test_frame_roundtrip_over_duplex() {
            let (mut client, mut server) = tokio::io::duplex(64);
            let payload = vec![7u8; 100_000];
            let expected = payload.clone();
            let writer = tokio::spawn(async move {
                write_frame(&mut client, &payload).await.unwrap();
                write_frame(&mut client, b"second").await.unwrap();
            });
            let first = read_frame(&mut server, DEFAULT_MAX_FRAME_SIZE).await.unwrap().unwrap();
            let second = read_frame(&mut server, DEFAULT_MAX_FRAME_SIZE).await.unwrap().unwrap();
            writer.await.unwrap();
            assert_eq!(first, expected, "Large frames should arrive whole");
            assert_eq!(second, b"second");
            assert!(read_frame(&mut server, DEFAULT_MAX_FRAME_SIZE).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_frame_header_is_big_endian() {
            let mut buffer = Vec::new();
            write_frame(&mut buffer, b"abc").await.unwrap();
            assert_eq!(buffer, vec![0, 0, 0, 3, b'a', b'b', b'c']);
        }

        #[tokio::test]
        async fn test_empty_frame() {
            let mut buffer = Vec::new();
            write_frame(&mut buffer, b"").await.unwrap();
            let mut reader = buffer.as_slice();
            assert_eq!(read_frame(&mut reader, 16).await.unwrap(), Some(vec![]));
        }

        #[tokio::test]
        async fn test_frame_too_large() {
            let mut buffer = Vec::new();
            write_frame(&mut buffer, &[0u8; 32]).await.unwrap();
            let mut reader = buffer.as_slice();
            match read_frame(&mut reader, 16).await {
                Err(ProtocolError::FrameTooLarge { size, max }) => {
                    assert_eq!(size, 32);
                    assert_eq!(max, 16);
                }
                other => panic!("Should reject oversize frame, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_truncated_header() {
            let mut reader: &[u8] = &[0, 0];
            assert!(matches!(read_frame(&mut reader, 16).await, Err(ProtocolError::Truncated)));
        }

        #[tokio::test]
        async fn test_truncated_payload() {
            let (mut client, mut server) = tokio::io::duplex(64);
            client.write_all(&[0, 0, 0, 10, 1, 2, 3]).await.unwrap();
            drop(client);
            assert!(matches!(read_frame(&mut server, 16).await, Err(ProtocolError::Truncated)));
        }

        #[tokio::test]
        async fn test_message_roundtrip() {
            let mut buffer = Vec::new();
            write_message(&mut buffer, &TransferReply::Found { size: 4097 }).await.unwrap();
            let mut reader = buffer.as_slice();
            let reply: Option<TransferReply> = read_message(&mut reader, DEFAULT_MAX_FRAME_SIZE).await.unwrap();
            assert_eq!(reply, Some(TransferReply::Found { size: 4097 }));
        }
    }

    mod message_tests {
        use std::collections::BTreeMap;
        use std::net::{IpAddr, Ipv4Addr};
        use serde_json::json;
        use crate::protocol::enums::tracker_request::TrackerRequest;
        use crate::protocol::enums::transfer_reply::TransferReply;
        use crate::protocol::enums::transfer_request::TransferRequest;
        use crate::protocol::errors::ProtocolError;
        use crate::protocol::structs::peer_address::PeerAddress;
        use crate::protocol::structs::tracker_response::TrackerResponse;

        #[test]
        fn test_parse_register() {
            let request = TrackerRequest::parse(br#"{"command":"register","peer_id":"a1b2c3d4","listen_port":5001}"#).unwrap();
            assert_eq!(request, TrackerRequest::Register { peer_id: String::from("a1b2c3d4"), listen_port: 5001 });
            assert_eq!(request.kind(), "register");
        }

        #[test]
        fn test_parse_legacy_field_names() {
            let request = TrackerRequest::parse(br#"{"command":"register","peer_id":"a","peer_port":6000}"#).unwrap();
            assert_eq!(request, TrackerRequest::Register { peer_id: String::from("a"), listen_port: 6000 });
            let request = TrackerRequest::parse(br#"{"command":"share","peer_id":"a","files":["x.mp3"]}"#).unwrap();
            assert_eq!(request, TrackerRequest::Share { peer_id: String::from("a"), filenames: vec![String::from("x.mp3")], replace: false });
            let request = TrackerRequest::parse(br#"{"command":"get_peers"}"#).unwrap();
            assert_eq!(request, TrackerRequest::ListPeers);
            assert_eq!(request.kind(), "list_peers");
        }

        #[test]
        fn test_parse_unit_commands() {
            assert_eq!(TrackerRequest::parse(br#"{"command":"list_peers"}"#).unwrap(), TrackerRequest::ListPeers);
            assert_eq!(TrackerRequest::parse(br#"{"command":"list_files"}"#).unwrap(), TrackerRequest::ListFiles);
            assert_eq!(TrackerRequest::parse(br#"{"command":"search"}"#).unwrap(), TrackerRequest::Search { keyword: String::new() });
        }

        #[test]
        fn test_parse_unknown_command() {
            match TrackerRequest::parse(br#"{"command":"explode"}"#) {
                Err(ProtocolError::UnknownCommand(command)) => assert_eq!(command, "explode"),
                other => panic!("Should be an unknown command, got {other:?}"),
            }
        }

        #[test]
        fn test_parse_malformed() {
            assert!(matches!(TrackerRequest::parse(b"not json"), Err(ProtocolError::Malformed(_))));
            assert!(matches!(TrackerRequest::parse(br#"{"peer_id":"a"}"#), Err(ProtocolError::Malformed(_))));
            assert!(matches!(TrackerRequest::parse(br#"{"command":5}"#), Err(ProtocolError::Malformed(_))));
            assert!(matches!(TrackerRequest::parse(br#"{"command":"register","peer_id":"a"}"#), Err(ProtocolError::Malformed(_))));
        }

        #[test]
        fn test_error_kinds_are_recoverable() {
            assert!(!ProtocolError::UnknownCommand(String::from("x")).is_fatal());
            assert!(!ProtocolError::Malformed(String::from("x")).is_fatal());
            assert!(ProtocolError::Truncated.is_fatal());
            assert!(ProtocolError::FrameTooLarge { size: 10, max: 1 }.is_fatal());
        }

        #[test]
        fn test_error_display() {
            assert_eq!(ProtocolError::UnknownCommand(String::from("x")).to_string(), "unknown command: x");
            assert_eq!(ProtocolError::Malformed(String::from("bad")).to_string(), "malformed request: bad");
        }

        #[test]
        fn test_peer_address_wire_format() {
            let address = PeerAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), 5001);
            assert_eq!(serde_json::to_value(address).unwrap(), json!(["10.0.0.2", 5001]));
            assert_eq!(address.to_string(), "10.0.0.2:5001");
        }

        #[test]
        fn test_search_response_wire_format() {
            let address = PeerAddress::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5001);
            let mut results = BTreeMap::new();
            results.insert(String::from("song1.mp3"), vec![address]);
            let response = TrackerResponse::with_results(results);
            assert_eq!(
                serde_json::to_value(&response).unwrap(),
                json!({"status": "success", "results": {"song1.mp3": [["127.0.0.1", 5001]]}})
            );
        }

        #[test]
        fn test_peers_response_wire_format() {
            let address = PeerAddress::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5001);
            let response = TrackerResponse::with_peers(vec![(String::from("a"), address)]);
            assert_eq!(
                serde_json::to_value(&response).unwrap(),
                json!({"status": "success", "peers": [["a", ["127.0.0.1", 5001]]]})
            );
        }

        #[test]
        fn test_error_response() {
            let response = TrackerResponse::error("peer not registered");
            assert!(!response.is_success());
            assert_eq!(serde_json::to_value(&response).unwrap(), json!({"status": "error", "message": "peer not registered"}));
        }

        #[test]
        fn test_transfer_wire_format() {
            assert_eq!(
                serde_json::to_value(TransferRequest::Download { filename: String::from("a.mp3") }).unwrap(),
                json!({"command": "download", "filename": "a.mp3"})
            );
            assert_eq!(serde_json::to_value(TransferRequest::Ready).unwrap(), json!({"command": "ready"}));
            assert_eq!(serde_json::to_value(TransferReply::Found { size: 3 }).unwrap(), json!({"status": "found", "size": 3}));
            assert_eq!(serde_json::to_value(TransferReply::NotFound).unwrap(), json!({"status": "not_found"}));
        }
    }
}
