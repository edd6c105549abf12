//! Ready-made topologies, assembled only through the composition algebra.

use crate::types::NetworkResult;

use super::{Network, NodeContainer, Pattern};

fn singletons<P, I>(network: &mut Network<P>, payloads: I) -> Vec<NodeContainer>
where
    I: IntoIterator<Item = P>,
{
    payloads
        .into_iter()
        .map(|payload| NodeContainer::singleton(network, payload))
        .collect()
}

/// `A - B - C - ...`
pub fn chain<P, I>(network: &mut Network<P>, payloads: I) -> NetworkResult<NodeContainer>
where
    I: IntoIterator<Item = P>,
{
    let parts = singletons(network, payloads);
    NodeContainer::new().compose_chain(network, Pattern::Series, &parts)
}

/// A chain whose last node is joined back to its first.
pub fn ring<P, I>(network: &mut Network<P>, payloads: I) -> NetworkResult<NodeContainer>
where
    I: IntoIterator<Item = P>,
{
    let ring = chain(network, payloads)?;
    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        NodeContainer::from(last).series(network, &NodeContainer::from(first))?;
    }
    Ok(ring)
}

/// One hub connected to every leaf. The hub is the first node of the result.
pub fn star<P, I>(network: &mut Network<P>, hub: P, leaves: I) -> NetworkResult<NodeContainer>
where
    I: IntoIterator<Item = P>,
{
    let hub = NodeContainer::singleton(network, hub);
    let leaves = singletons(network, leaves);
    hub.compose_chain(network, Pattern::Heads, &leaves)
}

/// Complete graph: every node connected to every other.
pub fn mesh<P, I>(network: &mut Network<P>, payloads: I) -> NetworkResult<NodeContainer>
where
    I: IntoIterator<Item = P>,
{
    let parts = singletons(network, payloads);
    NodeContainer::new().compose_chain(network, Pattern::AllPairs, &parts)
}

/// Two rails joined by a rung at every step.
///
/// Each `(left, right)` pair becomes a rung; consecutive rungs are joined
/// left-to-left and right-to-right. The result lists `L0, R0, L1, R1, ...`.
pub fn ladder<P, I>(network: &mut Network<P>, rungs: I) -> NetworkResult<NodeContainer>
where
    I: IntoIterator<Item = (P, P)>,
{
    let mut built: Vec<NodeContainer> = Vec::new();
    for (left, right) in rungs {
        let left = NodeContainer::singleton(network, left);
        let right = NodeContainer::singleton(network, right);
        built.push(left.series(network, &right)?);
    }
    for pair in built.windows(2) {
        pair[0].parallel(network, &pair[1])?;
    }
    NodeContainer::new().compose_chain(network, Pattern::Union, &built)
}
