//! Two peers in one process: a host and one client wired over the
//! in-memory transport.
//!
//! The client pokes the host-owned boss with a Master call, the host
//! answers with a Remote broadcast, and both sides drain their connections
//! the way a game loop would: one pump per tick.
//!
//! Run with: cargo run -p rpc --example loopback

use anyhow::Result;
use network::MemoryTransport;
use rpc::{
    InvocationError, NodeTree, Ownership, RpcReceiver, RpcSender, RpcTarget, SessionContext,
};
use std::collections::HashMap;
use tracing::info;
use types::{CallKind, NodePath, PeerId, Value};

const HOST: PeerId = PeerId(1);
const CLIENT: PeerId = PeerId(2);

struct OwnerTag(PeerId);

impl Ownership for OwnerTag {
    fn owner(&self) -> PeerId {
        self.0
    }
}

struct Boss {
    path: NodePath,
    owner: OwnerTag,
    health: i64,
}

impl RpcTarget for Boss {
    fn path(&self) -> NodePath {
        self.path.clone()
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<(), InvocationError> {
        match method {
            "take_damage" => {
                let amount = args.first().and_then(Value::as_int).ok_or_else(|| {
                    InvocationError::BadArguments {
                        method: method.to_string(),
                        detail: "expected (amount: int)".to_string(),
                    }
                })?;
                self.health -= amount;
                info!("{} took {amount} damage, {} hp left", self.path, self.health);
                Ok(())
            }
            "taunt" => {
                let line = args.first().and_then(Value::as_str).unwrap_or("...");
                info!("{} taunts: {line}", self.path);
                Ok(())
            }
            other => Err(InvocationError::UnknownMethod(other.to_string())),
        }
    }

    fn ownership(&self) -> Option<&dyn Ownership> {
        Some(&self.owner)
    }
}

struct World {
    nodes: HashMap<NodePath, Boss>,
}

impl World {
    fn with_boss(owner: PeerId) -> Self {
        let path = NodePath::new("/world/boss");
        let mut nodes = HashMap::new();
        nodes.insert(
            path.clone(),
            Boss {
                path,
                owner: OwnerTag(owner),
                health: 100,
            },
        );
        Self { nodes }
    }
}

impl NodeTree for World {
    fn resolve(&mut self, path: &NodePath) -> Option<&mut dyn RpcTarget> {
        self.nodes.get_mut(path).map(|n| n as &mut dyn RpcTarget)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let transport = MemoryTransport::new();
    let (host_end, client_end) = transport.open_pair();

    let mut host_session = SessionContext::host(HOST);
    host_session.add_peer(CLIENT, host_end);
    let client_session = SessionContext::client(CLIENT, HOST, client_end);

    // Both peers mirror the world and the registrations; the boss is
    // host-owned on every tree.
    let mut host_world = World::with_boss(HOST);
    let mut client_world = World::with_boss(HOST);
    for session in [&host_session, &client_session] {
        session.register("/world/boss", "take_damage", CallKind::Master);
        session.register("/world/boss", "taunt", CallKind::Remote);
    }

    // Tick 1: the client lands a hit. Master semantics route it to the
    // owner (the host) and nothing runs client-side.
    RpcSender::new(&client_session, &transport).send_to_host(
        client_world
            .resolve(&NodePath::new("/world/boss"))
            .expect("boss exists"),
        "take_damage",
        &[Value::from(25)],
    )?;
    RpcReceiver::new(&host_session, &transport).pump(&mut host_world);

    // Tick 2: the host answers with a Remote broadcast to every client.
    RpcSender::new(&host_session, &transport).send_to_all_peers(
        host_world
            .resolve(&NodePath::new("/world/boss"))
            .expect("boss exists"),
        "taunt",
        &[Value::from("is that all you've got?")],
    )?;
    RpcReceiver::new(&client_session, &transport).pump(&mut client_world);

    info!(
        "host-side boss hp: {}",
        host_world.nodes[&NodePath::new("/world/boss")].health
    );
    Ok(())
}
