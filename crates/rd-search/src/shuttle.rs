//! On-site behaviour: drop on arrival, then shuttle from the nearest depot.

use tracing::debug;

use rd_core::NodeId;
use rd_fleet::{Catastrophe, Vehicle};
use rd_network::{Edge, Network};

use crate::timeline::Scratch;
use crate::{RoutePlan, SearchContext, SearchResult};

/// Finish a branch that has reached the catastrophe.
///
/// Drops what the cargo covers, then repeats depot round trips until the
/// demand is met, the deadline passes, or a trip would bring nothing.  A
/// trip is kept only if its final drop lands before the deadline.  `None`
/// if nothing was ever delivered.
pub(crate) fn complete(
    mut branch: Scratch,
    catastrophe: &Catastrophe,
    ctx: &SearchContext<'_>,
) -> SearchResult<Option<RoutePlan>> {
    let mut cat = catastrophe.clone();
    let target = branch.node;
    branch.drop_at(&mut cat)?;

    let mut trips = 0u32;
    while !cat.is_resolved() && !branch.expired(&cat) {
        let Some((out, back)) = nearest_depot(ctx.network, &branch.vehicle, target) else {
            break;
        };
        let mut trip = branch.clone();
        let mut trip_cat = cat.clone();
        if !trip.cross(&out, &trip_cat)? {
            break;
        }
        if trip.load(ctx, trip_cat.demand())?.is_empty() {
            break;
        }
        if !trip.cross(&back, &trip_cat)? {
            break;
        }
        if trip.drop_at(&mut trip_cat)?.is_empty() {
            break;
        }
        branch = trip;
        cat = trip_cat;
        trips += 1;
    }

    if !branch.timeline.delivered_anything() {
        return Ok(None);
    }
    debug!(
        vehicle = %branch.vehicle.name,
        trips,
        resolved = cat.is_resolved(),
        "on-site plan complete"
    );
    Ok(Some(branch.timeline.into_plan()))
}

/// The closest usable neighbour of `target` and the shortest usable edge
/// back.  Ties go to the first edge in adjacency order.
fn nearest_depot(net: &Network, vehicle: &Vehicle, target: NodeId) -> Option<(Edge, Edge)> {
    let usable = |e: &Edge| {
        vehicle.travel_possible(e.mode, e.access) && vehicle.can_ever_cover(e.distance_km)
    };
    let shortest = |from: NodeId, to: Option<NodeId>| {
        net.out_edges(from)
            .map(|e| net.edge(e))
            .filter(|e| e.to != from && to.is_none_or(|t| e.to == t) && usable(e))
            .fold(None, |best: Option<Edge>, e| match best {
                Some(b) if b.distance_km <= e.distance_km => Some(b),
                _ => Some(e),
            })
    };

    let out = shortest(target, None)?;
    let back = shortest(out.to, Some(target))?;
    Some((out, back))
}
