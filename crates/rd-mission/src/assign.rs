//! Greedy vehicle-to-catastrophe assignment.
//!
//! Scarce catastrophes pick first: each round takes the catastrophe with the
//! fewest remaining candidate vehicles and gives it the candidate that burns
//! the least fuel.  That vehicle then drops out of every other list.  The
//! result is a heuristic, not an optimal matching, and which catastrophe
//! loses out under contention follows directly from this order.

use rd_core::{CatastropheId, VehicleId};
use rd_search::RoutePlan;

/// One feasible route for one vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub vehicle: VehicleId,
    pub plan:    RoutePlan,
}

/// Outcome of one planning round.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    /// In the order the decisions were made.
    pub chosen:     Vec<(CatastropheId, Candidate)>,
    /// Catastrophes that ran out of candidates.
    pub unassigned: Vec<CatastropheId>,
}

impl Assignment {
    pub fn vehicle_for(&self, catastrophe: CatastropheId) -> Option<VehicleId> {
        self.chosen
            .iter()
            .find(|(c, _)| *c == catastrophe)
            .map(|(_, cand)| cand.vehicle)
    }
}

/// Assign vehicles to catastrophes.
///
/// `routes` lists every catastrophe in creation order with its candidates in
/// vehicle order.  Ties on candidate count go to the earlier catastrophe;
/// ties on fuel go to the earlier candidate.  Runs at most `routes.len()`
/// rounds.
pub fn assign(mut routes: Vec<(CatastropheId, Vec<Candidate>)>) -> Assignment {
    let mut out = Assignment::default();

    while let Some(pick) = routes
        .iter()
        .enumerate()
        .min_by_key(|(_, (_, cands))| cands.len())
        .map(|(i, _)| i)
    {
        let (catastrophe, candidates) = routes.remove(pick);
        let Some(best) = candidates
            .into_iter()
            .reduce(|best, c| if c.plan.fuel_consumed < best.plan.fuel_consumed { c } else { best })
        else {
            out.unassigned.push(catastrophe);
            continue;
        };

        for (_, others) in routes.iter_mut() {
            others.retain(|c| c.vehicle != best.vehicle);
        }
        out.chosen.push((catastrophe, best));
    }
    out
}
