// Performance benchmarks for the registry and tracker request path
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use p2p_share::config::structs::configuration::Configuration;
use p2p_share::protocol::structs::peer_address::PeerAddress;
use p2p_share::registry::structs::registry::Registry;
use p2p_share::tracker::structs::tracker_service::TrackerService;

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

fn populated_registry(peers: usize, files_per_peer: usize) -> Registry {
    let registry = Registry::new();
    for peer in 0..peers {
        let peer_id = format!("peer{peer}");
        registry.upsert_peer(&peer_id, PeerAddress::new(LOCALHOST, 6000 + (peer % 50000) as u16));
        let filenames: Vec<String> = (0..files_per_peer).map(|file| format!("track-{peer}-{file}.mp3")).collect();
        registry.add_shares(&peer_id, &filenames);
    }
    registry
}

fn bench_upsert_peer(c: &mut Criterion) {
    let registry = Registry::new();
    let mut counter = 0u64;
    c.bench_function("upsert_peer", |b| {
        b.iter(|| {
            counter += 1;
            black_box(registry.upsert_peer(&format!("peer{}", counter % 10_000), PeerAddress::new(LOCALHOST, 6001)));
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for peers in [10usize, 100, 1000] {
        let registry = populated_registry(peers, 20);
        group.bench_with_input(BenchmarkId::from_parameter(peers), &peers, |b, _| {
            b.iter(|| black_box(registry.search("track-7")));
        });
    }
    group.finish();
}

fn bench_replace_shares(c: &mut Criterion) {
    let registry = populated_registry(100, 20);
    let filenames: Vec<String> = (0..20).map(|file| format!("replacement-{file}.wav")).collect();
    c.bench_function("replace_shares", |b| {
        b.iter(|| black_box(registry.replace_shares("peer42", &filenames)));
    });
}

fn bench_handle_payload(c: &mut Criterion) {
    let service = TrackerService::new(Arc::new(Configuration::default()));
    service.register("peer1", PeerAddress::new(LOCALHOST, 6001));
    service.share("peer1", &[String::from("song.mp3")], false);
    let payload = br#"{"command":"search","keyword":"song"}"#;
    c.bench_function("handle_payload_search", |b| {
        b.iter(|| black_box(service.handle_payload(payload, LOCALHOST)));
    });
}

criterion_group!(benches, bench_upsert_peer, bench_search, bench_replace_shares, bench_handle_payload);
criterion_main!(benches);
