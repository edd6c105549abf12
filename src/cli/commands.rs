//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::engine::{ConnectivityEngine, PathFinder};
use crate::format::{dump, NetworkSnapshot};
use crate::notation::Topology;
use crate::types::{NetworkError, NetworkResult, NodeId};

/// Load a topology from inline notation or a notation file.
pub fn load_topology(expr: Option<&str>, file: Option<&Path>) -> NetworkResult<Topology> {
    match (expr, file) {
        (Some(expr), _) => Topology::parse(expr),
        (None, Some(path)) => Topology::from_file(path),
        (None, None) => Err(NetworkError::Parse {
            position: 0,
            message: "no topology given".to_string(),
        }),
    }
}

fn names<'a, I>(topology: &Topology, ids: I) -> NetworkResult<Vec<String>>
where
    I: IntoIterator<Item = &'a NodeId>,
{
    ids.into_iter()
        .map(|&id| topology.name(id).map(str::to_string))
        .collect()
}

fn print_json(out: &mut impl Write, value: &serde_json::Value) -> NetworkResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print every node with its neighbours.
pub fn cmd_dump(topology: &Topology, json: bool, out: &mut impl Write) -> NetworkResult<()> {
    if json {
        NetworkSnapshot::capture(topology.network()).write_json(out, true)
    } else {
        out.write_all(dump(topology.network()).as_bytes())?;
        Ok(())
    }
}

/// Print summary statistics.
pub fn cmd_stats(topology: &Topology, json: bool, out: &mut impl Write) -> NetworkResult<()> {
    let network = topology.network();
    let islands = ConnectivityEngine::new().islands(network);
    let largest = islands.iter().map(|i| i.len()).max().unwrap_or(0);
    let isolated = network.iter().filter(|(_, n)| n.is_isolated()).count();

    if json {
        print_json(
            out,
            &serde_json::json!({
                "nodes": network.node_count(),
                "edges": network.edge_count(),
                "islands": islands.len(),
                "largest_island": largest,
                "isolated": isolated,
            }),
        )
    } else {
        writeln!(out, "Nodes: {}", network.node_count())?;
        writeln!(out, "Edges: {}", network.edge_count())?;
        writeln!(out, "Islands: {}", islands.len())?;
        writeln!(out, "Largest island: {}", largest)?;
        writeln!(out, "Isolated nodes: {}", isolated)?;
        Ok(())
    }
}

/// Print the island containing `name`.
pub fn cmd_island(
    topology: &Topology,
    name: &str,
    json: bool,
    out: &mut impl Write,
) -> NetworkResult<()> {
    let start = topology.resolve(name)?;
    let island = ConnectivityEngine::new().island(topology.network(), start)?;
    let members = names(topology, &island)?;

    if json {
        print_json(
            out,
            &serde_json::json!({"start": name, "size": members.len(), "nodes": members}),
        )
    } else {
        writeln!(out, "Island of {} ({} nodes): {}", name, members.len(), members.join(", "))?;
        Ok(())
    }
}

/// Print nodes grouped by distance from `name`.
pub fn cmd_levels(
    topology: &Topology,
    name: &str,
    json: bool,
    out: &mut impl Write,
) -> NetworkResult<()> {
    let start = topology.resolve(name)?;
    let levels = ConnectivityEngine::new().propagation_levels(topology.network(), start)?;
    let named: Vec<Vec<String>> = levels
        .iter()
        .map(|level| names(topology, level))
        .collect::<NetworkResult<_>>()?;

    if json {
        print_json(out, &serde_json::json!({"start": name, "levels": named}))
    } else {
        for (depth, level) in named.iter().enumerate() {
            writeln!(out, "{}: {}", depth, level.join(", "))?;
        }
        Ok(())
    }
}

/// Print the shortest path between two nodes.
pub fn cmd_path(
    topology: &Topology,
    from: &str,
    to: &str,
    json: bool,
    out: &mut impl Write,
) -> NetworkResult<()> {
    let source = topology.resolve(from)?;
    let target = topology.resolve(to)?;
    let path = PathFinder::new().find_path(topology.network(), source, target)?;

    match path {
        Some(path) => {
            let route = names(topology, path.nodes())?;
            if json {
                print_json(
                    out,
                    &serde_json::json!({
                        "from": from,
                        "to": to,
                        "path": route,
                        "hops": path.hop_count(),
                        "explored": path.explored(),
                    }),
                )
            } else {
                writeln!(out, "{} ({} hops)", route.join(" -> "), path.hop_count())?;
                Ok(())
            }
        }
        None => {
            if json {
                print_json(
                    out,
                    &serde_json::json!({"from": from, "to": to, "path": null}),
                )
            } else {
                writeln!(out, "No path between {} and {}", from, to)?;
                Ok(())
            }
        }
    }
}

/// Print every island in the topology.
pub fn cmd_islands(topology: &Topology, json: bool, out: &mut impl Write) -> NetworkResult<()> {
    let islands = ConnectivityEngine::new().islands(topology.network());
    let named: Vec<Vec<String>> = islands
        .iter()
        .map(|island| names(topology, island))
        .collect::<NetworkResult<_>>()?;

    if json {
        print_json(out, &serde_json::json!({"count": named.len(), "islands": named}))
    } else {
        for (i, island) in named.iter().enumerate() {
            writeln!(out, "Island {} ({} nodes): {}", i, island.len(), island.join(", "))?;
        }
        Ok(())
    }
}
