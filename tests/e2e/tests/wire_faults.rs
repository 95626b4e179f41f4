//! Malformed traffic and live-session races: every fault is absorbed,
//! reported once, and never disturbs the rest of the stream.

use parley_e2e_tests::{client_id, Harness};
use types::{CallKind, NodePath, Value};

fn valid_wire(path: &str, method: &str) -> Vec<u8> {
    codec::encode_rpc(&NodePath::new(path), method, &[Value::from(1)])
        .unwrap()
        .to_vec()
}

#[test]
fn unknown_packet_kind_reports_once_and_spares_the_rest() {
    let mut harness = Harness::new(1);
    let client = client_id(0);
    harness.register_everywhere("/world/npc", "wave", CallKind::Remote);
    harness.spawn_everywhere("/world/npc", None);

    // Same unknown-kind buffer three times, then a valid call behind them.
    let mut bogus = valid_wire("/world/npc", "wave");
    bogus[5] = 0x7F; // kind byte; the checksum only covers the body
    for _ in 0..3 {
        harness.inject_from_host(client, &bogus);
    }
    harness.inject_from_host(client, &valid_wire("/world/npc", "wave"));
    harness.pump_all();

    let peer = harness.client(client);
    assert_eq!(peer.calls("/world/npc").len(), 1);
    assert_eq!(peer.session.diagnostics().len(), 1);
    assert!(peer
        .session
        .diagnostics()
        .contains("failed to decode inbound packet: unknown packet kind 127"));
}

#[test]
fn corrupted_and_truncated_buffers_are_absorbed() {
    let mut harness = Harness::new(1);
    let client = client_id(0);
    harness.register_everywhere("/world/npc", "wave", CallKind::Remote);
    harness.spawn_everywhere("/world/npc", None);

    let wire = valid_wire("/world/npc", "wave");

    let mut corrupted = wire.clone();
    let last = corrupted.len() - 1;
    corrupted[last] ^= 0xFF;
    harness.inject_from_host(client, &corrupted);

    harness.inject_from_host(client, &wire[..wire.len() - 2]);
    harness.inject_from_host(client, &[0u8; 3]);

    harness.inject_from_host(client, &wire);
    harness.pump_all();

    let peer = harness.client(client);
    // The valid trailing call still executed.
    assert_eq!(peer.calls("/world/npc").len(), 1);
    // Three distinct failure messages: checksum, length, too-small.
    assert_eq!(peer.session.diagnostics().len(), 3);
}

#[test]
fn call_to_a_node_destroyed_in_flight_is_a_warned_drop() {
    let mut harness = Harness::new(1);
    let client = client_id(0);
    harness.register_everywhere("/world/mob7", "die", CallKind::Remote);
    harness.spawn_everywhere("/world/mob7", None);

    harness
        .host_sends_to(client, "/world/mob7", "die", &[])
        .unwrap();
    // The mob despawns client-side before the envelope is pumped, the
    // normal race in a live session.
    harness.client_mut(client).world.despawn("/world/mob7");
    harness.pump_all();

    let peer = harness.client(client);
    assert_eq!(peer.session.diagnostics().len(), 1);
    assert!(peer
        .session
        .diagnostics()
        .contains("rpc call to missing node: /world/mob7"));
}

#[test]
fn receive_side_unregistered_method_is_dropped_not_executed() {
    let mut harness = Harness::new(1);
    let client = client_id(0);
    // Registered on the host (so the send goes out) but never on the
    // client: e.g. version skew between peers.
    harness.host.session.register("/world/npc", "wave", CallKind::Remote);
    harness.spawn_everywhere("/world/npc", None);

    harness
        .host_sends_to(client, "/world/npc", "wave", &[])
        .unwrap();
    harness.pump_all();

    let peer = harness.client(client);
    assert!(peer.calls("/world/npc").is_empty());
    assert_eq!(peer.session.diagnostics().len(), 1);
}

#[test]
fn faults_on_one_connection_do_not_leak_to_another() {
    let mut harness = Harness::new(2);
    let noisy = client_id(0);
    let clean = client_id(1);
    harness.register_everywhere("/world/npc", "wave", CallKind::Remote);
    harness.spawn_everywhere("/world/npc", None);

    harness.inject_from_host(noisy, &[0u8; 3]);
    harness
        .host_sends_to(clean, "/world/npc", "wave", &[])
        .unwrap();
    harness.pump_all();

    assert_eq!(harness.client(clean).calls("/world/npc").len(), 1);
    assert!(harness.client(clean).session.diagnostics().is_empty());
    assert_eq!(harness.client(noisy).session.diagnostics().len(), 1);
}
