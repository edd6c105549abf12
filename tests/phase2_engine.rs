//! Phase 2 tests: Connectivity engine + path finder.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use node_network::engine::{ConnectivityEngine, NodePath, PathFinder};
use node_network::graph::{topology, LevelWalker, Network};
use node_network::types::{NetworkError, NodeId};

// ==================== Helper ====================

/// A-B-C-D-A, returned as (network, [a, b, c, d]).
fn square() -> (Network<&'static str>, [NodeId; 4]) {
    let mut network = Network::new();
    let a = network.add_node("A");
    let b = network.add_node("B");
    let c = network.add_node("C");
    let d = network.add_node("D");
    network.chain(&[a, b, c, d, a]).unwrap();
    (network, [a, b, c, d])
}

/// Random graph with `n` nodes and about `edges` edges.
fn random_network(seed: u64, n: usize, edges: usize) -> Network<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::with_capacity(n);
    let ids: Vec<NodeId> = (0..n).map(|i| network.add_node(i)).collect();
    for _ in 0..edges {
        let a = ids[rng.gen_range(0..n)];
        let b = ids[rng.gen_range(0..n)];
        network.connect(a, b).unwrap();
    }
    network
}

fn assert_valid_path<P>(network: &Network<P>, path: &NodePath, from: NodeId, to: NodeId) {
    assert_eq!(path.source(), Some(from));
    assert_eq!(path.target(), Some(to));
    for pair in path.nodes().windows(2) {
        assert!(
            network.neighbors(pair[0]).unwrap().contains(&pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
    let distinct: BTreeSet<NodeId> = path.nodes().iter().copied().collect();
    assert_eq!(distinct.len(), path.len(), "path revisits a node");
}

fn set(ids: &[NodeId]) -> BTreeSet<NodeId> {
    ids.iter().copied().collect()
}

// ==================== Scenario Tests ====================

#[test]
fn test_cycle_island_levels_and_path() {
    let (network, [a, b, c, d]) = square();
    let engine = ConnectivityEngine::new();

    assert_eq!(engine.island(&network, a).unwrap(), set(&[a, b, c, d]));
    assert_eq!(
        engine.propagation_levels(&network, a).unwrap(),
        vec![set(&[a]), set(&[b, d]), set(&[c])]
    );

    let path = PathFinder::new().find_path(&network, a, c).unwrap().unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.hop_count(), 2);
    assert_valid_path(&network, &path, a, c);
}

#[test]
fn test_cycle_path_tie_break_prefers_lowest_id() {
    let (network, [a, b, c, _]) = square();
    let path = PathFinder::new().find_path(&network, a, c).unwrap().unwrap();
    assert_eq!(path.nodes(), &[a, b, c]);
}

#[test]
fn test_isolated_node() {
    let mut network = Network::new();
    let n = network.add_node("N");
    let engine = ConnectivityEngine::new();

    assert_eq!(engine.island(&network, n).unwrap(), set(&[n]));
    assert_eq!(engine.propagation_levels(&network, n).unwrap(), vec![set(&[n])]);

    let path = PathFinder::new().find_path(&network, n, n).unwrap().unwrap();
    assert_eq!(path.nodes(), &[n]);
    assert_eq!(path.len(), 1);
    assert_eq!(path.hop_count(), 0);
}

#[test]
fn test_all_pairs_island_size() {
    let mut network = Network::new();
    let left = node_network::NodeContainer::from_payloads(&mut network, ['x', 'y']);
    let right = node_network::NodeContainer::from_payloads(&mut network, ['z', 'w']);
    left.all_pairs(&mut network, &right).unwrap();

    let island = ConnectivityEngine::new()
        .island(&network, left.nodes()[0])
        .unwrap();
    assert_eq!(island.len(), 4);
}

// ==================== Connectivity Tests ====================

#[test]
fn test_disjoint_islands() {
    let mut network = Network::new();
    let first = topology::chain(&mut network, 0..3).unwrap();
    let second = topology::ring(&mut network, 10..14).unwrap();
    let lonely = network.add_node(99);
    let engine = ConnectivityEngine::new();

    let island_a = engine.island(&network, first.nodes()[0]).unwrap();
    let island_b = engine.island(&network, second.nodes()[2]).unwrap();

    assert_eq!(island_a.len(), 3);
    assert_eq!(island_b.len(), 4);
    assert!(island_a.is_disjoint(&island_b));

    let islands = engine.islands(&network);
    assert_eq!(islands.len(), 3);
    assert_eq!(islands[0], island_a);
    assert_eq!(islands[1], island_b);
    assert_eq!(islands[2], set(&[lonely]));
}

#[test]
fn test_islands_partition_network() {
    let network = random_network(11, 200, 120);
    let islands = ConnectivityEngine::new().islands(&network);

    let total: usize = islands.iter().map(|i| i.len()).sum();
    assert_eq!(total, network.node_count());

    let mut union = BTreeSet::new();
    for island in &islands {
        assert!(union.is_disjoint(island));
        union.extend(island.iter().copied());
    }
    // Ordered by lowest member.
    let firsts: Vec<NodeId> = islands.iter().map(|i| *i.first().unwrap()).collect();
    let mut sorted = firsts.clone();
    sorted.sort();
    assert_eq!(firsts, sorted);
}

#[test]
fn test_propagation_levels_partition_island() {
    let engine = ConnectivityEngine::new();
    for seed in 0..5 {
        let network = random_network(seed, 120, 150);
        let start = network.ids().next().unwrap();

        let island = engine.island(&network, start).unwrap();
        let levels = engine.propagation_levels(&network, start).unwrap();

        let mut seen = BTreeSet::new();
        for level in &levels {
            assert!(!level.is_empty());
            assert!(seen.is_disjoint(level), "node appears on two levels");
            seen.extend(level.iter().copied());
        }
        assert_eq!(seen, island);
    }
}

#[test]
fn test_large_chain_does_not_overflow() {
    let mut network = Network::new();
    let line = topology::chain(&mut network, 0..10_000).unwrap();
    let engine = ConnectivityEngine::new();
    let first = line.first().unwrap();
    let last = line.last().unwrap();

    assert_eq!(engine.island(&network, first).unwrap().len(), 10_000);
    assert_eq!(engine.propagation_levels(&network, first).unwrap().len(), 10_000);

    let path = PathFinder::new()
        .find_path(&network, first, last)
        .unwrap()
        .unwrap();
    assert_eq!(path.hop_count(), 9_999);
}

#[test]
fn test_distance_and_is_connected() {
    let (mut network, [a, _, c, _]) = square();
    let engine = ConnectivityEngine::new();
    let e = network.add_node("E");

    assert_eq!(engine.distance(&network, a, c).unwrap(), Some(2));
    assert_eq!(engine.distance(&network, a, a).unwrap(), Some(0));
    assert_eq!(engine.distance(&network, a, e).unwrap(), None);
    assert!(engine.is_connected(&network, c, a).unwrap());
    assert!(!engine.is_connected(&network, e, a).unwrap());
}

#[test]
fn test_engine_rejects_foreign_ids() {
    let (network, [a, ..]) = square();
    let mut other: Network<u8> = Network::new();
    let foreign = (0..10).map(|i| other.add_node(i)).last().unwrap();

    let engine = ConnectivityEngine::new();
    assert!(matches!(
        engine.island(&network, foreign),
        Err(NetworkError::NodeNotFound(_))
    ));
    assert!(engine.distance(&network, a, foreign).is_err());
    assert!(PathFinder::new().find_path(&network, foreign, a).is_err());
    assert!(PathFinder::new().find_path(&network, a, foreign).is_err());
}

// ==================== Level Walker Tests ====================

#[test]
fn test_level_walker_steps() {
    let (network, [a, b, c, d]) = square();
    let mut walker = LevelWalker::new(&network, a).unwrap();

    assert_eq!(walker.depth(), 0);
    assert_eq!(walker.step(&network), Some(&set(&[b, d])));
    assert_eq!(walker.step(&network), Some(&set(&[c])));
    assert_eq!(walker.step(&network), None);
    assert_eq!(walker.depth(), 2);
    assert_eq!(walker.level_of(c), Some(2));
    assert!(walker.has_visited(d));

    assert_eq!(walker.trace_back(&network, c).unwrap(), vec![c, b, a]);
}

#[test]
fn test_level_walker_is_per_call_state() {
    let (network, [a, b, ..]) = square();

    // Two independent walks from different nodes give independent results.
    let mut first = LevelWalker::new(&network, a).unwrap();
    first.run(&network);
    let mut second = LevelWalker::new(&network, b).unwrap();
    second.run(&network);

    assert_eq!(first.levels()[0], set(&[a]));
    assert_eq!(second.levels()[0], set(&[b]));
    assert_eq!(first.visited().len(), 4);
    assert_eq!(second.visited().len(), 4);
}

// ==================== Path Finder Tests ====================

#[test]
fn test_no_path_between_islands() {
    let mut network = Network::new();
    let left = topology::chain(&mut network, 0..4).unwrap();
    let right = topology::mesh(&mut network, 10..13).unwrap();

    let finder = PathFinder::new();
    let result = finder
        .find_path(&network, left.first().unwrap(), right.last().unwrap())
        .unwrap();
    assert!(result.is_none());

    let result = finder
        .find_path(&network, right.first().unwrap(), left.last().unwrap())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_path_adjacent_nodes() {
    let (network, [a, b, ..]) = square();
    let path = PathFinder::new().find_path(&network, a, b).unwrap().unwrap();
    assert_eq!(path.nodes(), &[a, b]);
}

#[test]
fn test_path_length_matches_levels_on_random_graphs() {
    let engine = ConnectivityEngine::new();
    let finder = PathFinder::new();

    for seed in 0..8 {
        let network = random_network(100 + seed, 80, 100);
        let ids: Vec<NodeId> = network.ids().collect();
        let start = ids[(seed as usize * 7) % ids.len()];
        let levels = engine.propagation_levels(&network, start).unwrap();

        for &target in &ids {
            let level = levels.iter().position(|l| l.contains(&target));
            let path = finder.find_path(&network, start, target).unwrap();
            match (level, path) {
                (Some(depth), Some(path)) => {
                    assert_eq!(path.len() - 1, depth, "seed {} target {}", seed, target);
                    assert_valid_path(&network, &path, start, target);
                }
                (None, None) => {}
                (level, path) => panic!(
                    "seed {}: level {:?} disagrees with path {:?}",
                    seed, level, path
                ),
            }
        }
    }
}

#[test]
fn test_path_is_deterministic() {
    let network = random_network(42, 150, 300);
    let ids: Vec<NodeId> = network.ids().collect();
    let finder = PathFinder::new();

    let first = finder.find_path(&network, ids[0], ids[149]).unwrap();
    let second = finder.find_path(&network, ids[0], ids[149]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_ladder_shortest_path() {
    let mut network = Network::new();
    let ladder =
        topology::ladder(&mut network, (0..5).map(|i| (i * 2, i * 2 + 1))).unwrap();
    let n = ladder.nodes();

    // Corner to opposite corner: 4 steps along a rail + 1 rung.
    let path = PathFinder::new()
        .find_path(&network, n[0], n[9])
        .unwrap()
        .unwrap();
    assert_eq!(path.hop_count(), 5);
    assert_valid_path(&network, &path, n[0], n[9]);
}

#[test]
fn test_explored_counts_distinct_nodes() {
    let mut network = Network::new();
    let line = topology::chain(&mut network, 0..21).unwrap();

    let path = PathFinder::new()
        .find_path(&network, line.nodes()[5], line.nodes()[9])
        .unwrap()
        .unwrap();

    assert_eq!(path.hop_count(), 4);
    assert!(path.explored() >= path.len());
    assert!(path.explored() < network.node_count());
}
