//! End-to-end call-semantics scenarios: who executes what, and when.

use parley_e2e_tests::{client_id, Harness};
use types::{CallKind, NodePath, Value};

#[test]
fn remote_executes_on_recipient_never_on_sender() {
    let mut harness = Harness::new(1);
    let client = client_id(0);
    harness.register_everywhere("/world/npc", "wave", CallKind::Remote);
    harness.spawn_everywhere("/world/npc", None);

    harness
        .host_sends_to(client, "/world/npc", "wave", &[Value::from("hello")])
        .unwrap();
    harness.pump_all();

    assert!(harness.host.calls("/world/npc").is_empty());
    let calls = harness.client(client).calls("/world/npc");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "wave");
    assert_eq!(calls[0].1, vec![Value::from("hello")]);
}

#[test]
fn remote_sync_executes_on_both_sides_exactly_once() {
    let mut harness = Harness::new(1);
    let client = client_id(0);
    harness.register_everywhere("/world/clock", "set_time", CallKind::RemoteSync);
    harness.spawn_everywhere("/world/clock", None);

    let args = vec![Value::from(120), Value::List(vec![Value::from(1)])];
    harness
        .client_sends_to_host(client, "/world/clock", "set_time", &args)
        .unwrap();
    harness.pump_all();

    assert_eq!(harness.client(client).calls("/world/clock").len(), 1);
    assert_eq!(harness.host.calls("/world/clock").len(), 1);
    assert_eq!(harness.host.calls("/world/clock")[0].1, args);
}

#[test]
fn puppet_never_reaches_or_runs_on_the_owner() {
    let mut harness = Harness::new(2);
    let owner = client_id(0);
    let other = client_id(1);
    harness.register_everywhere("/world/player1", "correct_position", CallKind::Puppet);
    harness.spawn_everywhere("/world/player1", Some(owner));

    // Addressed to the owner: no send, no execution anywhere.
    harness
        .host_sends_to(owner, "/world/player1", "correct_position", &[])
        .unwrap();
    assert_eq!(harness.wire_backlog(), 0);

    // Addressed to a non-owner: delivered and executed there.
    harness
        .host_sends_to(other, "/world/player1", "correct_position", &[])
        .unwrap();
    harness.pump_all();

    assert!(harness.client(owner).calls("/world/player1").is_empty());
    assert_eq!(harness.client(other).calls("/world/player1").len(), 1);
    assert!(harness.host.calls("/world/player1").is_empty());
    assert!(harness.host.session.diagnostics().is_empty());
}

#[test]
fn master_scenario_take_damage_routes_to_the_owner_only() {
    // /world/player1 registered as Master, owned by peer X. Addressed to X
    // it lands and runs at X; addressed to Y it is an authorized drop with
    // no diagnostic.
    let mut harness = Harness::new(2);
    let x = client_id(0);
    let y = client_id(1);
    harness.register_everywhere("/world/player1", "take_damage", CallKind::Master);
    harness.spawn_everywhere("/world/player1", Some(x));

    harness
        .host_sends_to(x, "/world/player1", "take_damage", &[Value::from(10)])
        .unwrap();
    harness
        .host_sends_to(y, "/world/player1", "take_damage", &[Value::from(10)])
        .unwrap();
    harness.pump_all();

    let at_x = harness.client(x).calls("/world/player1");
    assert_eq!(at_x.len(), 1);
    assert_eq!(at_x[0].1, vec![Value::from(10)]);
    assert!(harness.client(y).calls("/world/player1").is_empty());
    assert!(harness.host.session.diagnostics().is_empty());
}

#[test]
fn receive_side_authority_gate_holds_even_if_sender_misroutes() {
    // A peer that owns a puppet node drops the call on receipt, even when
    // a (buggy or malicious) sender delivered it anyway.
    let mut harness = Harness::new(1);
    let owner = client_id(0);
    harness.register_everywhere("/world/player1", "correct_position", CallKind::Puppet);
    harness.spawn_everywhere("/world/player1", Some(owner));

    let wire = codec::encode_rpc(&NodePath::new("/world/player1"), "correct_position", &[])
        .unwrap();
    harness.inject_from_host(owner, &wire);
    harness.pump_all();

    assert!(harness.client(owner).calls("/world/player1").is_empty());
}

#[test]
fn host_self_send_executes_once_and_skips_the_wire() {
    let mut harness = Harness::new(1);
    harness.register_everywhere("/world/score", "reset", CallKind::RemoteSync);
    harness.spawn_everywhere("/world/score", None);

    harness
        .host_sends_to_host("/world/score", "reset", &[])
        .unwrap();

    assert_eq!(harness.host.calls("/world/score").len(), 1);
    assert_eq!(harness.wire_backlog(), 0);
}

#[test]
fn broadcast_reaches_every_client() {
    let mut harness = Harness::new(3);
    harness.register_everywhere("/world/clock", "sync", CallKind::RemoteSync);
    harness.spawn_everywhere("/world/clock", None);

    harness
        .host_broadcasts("/world/clock", "sync", &[Value::from(7)])
        .unwrap();
    harness.pump_all();

    for n in 0..3 {
        assert_eq!(harness.client(client_id(n)).calls("/world/clock").len(), 1);
    }
    // RemoteSync ran locally exactly once despite three recipients.
    assert_eq!(harness.host.calls("/world/clock").len(), 1);
}

#[test]
fn unregistered_method_never_executes_and_reports_once() {
    let mut harness = Harness::new(1);
    let client = client_id(0);
    harness.spawn_everywhere("/world/npc", None);

    for _ in 0..5 {
        harness
            .host_sends_to(client, "/world/npc", "wave", &[])
            .unwrap();
    }
    harness.pump_all();

    assert!(harness.host.calls("/world/npc").is_empty());
    assert!(harness.client(client).calls("/world/npc").is_empty());
    assert_eq!(harness.wire_backlog(), 0);
    assert_eq!(harness.host.session.diagnostics().len(), 1);
}

#[test]
fn per_connection_order_is_preserved_through_dispatch() {
    let mut harness = Harness::new(1);
    let client = client_id(0);
    harness.register_everywhere("/world/npc", "step", CallKind::Remote);
    harness.spawn_everywhere("/world/npc", None);

    for i in 0..10 {
        harness
            .host_sends_to(client, "/world/npc", "step", &[Value::from(i)])
            .unwrap();
    }
    harness.pump_all();

    let calls = harness.client(client).calls("/world/npc");
    assert_eq!(calls.len(), 10);
    for (i, (_, args)) in calls.iter().enumerate() {
        assert_eq!(args, &vec![Value::from(i as i32)]);
    }
}

#[test]
fn client_to_client_traffic_needs_the_host_to_relay() {
    // Clients hold a single connection (to the host); sending "to a peer"
    // from a client is a dead link and a warned no-op, not a crash and not
    // an inferred local execution.
    let mut harness = Harness::new(2);
    harness.register_everywhere("/world/npc", "wave", CallKind::Remote);
    harness.spawn_everywhere("/world/npc", None);

    let me = client_id(0);
    let other = client_id(1);
    harness
        .client_sends_to_peer(me, other, "/world/npc", "wave", &[])
        .unwrap();
    harness.pump_all();

    assert!(harness.client(other).calls("/world/npc").is_empty());
    assert!(harness.client(me).calls("/world/npc").is_empty());
    assert_eq!(harness.client(me).session.diagnostics().len(), 1);
}
