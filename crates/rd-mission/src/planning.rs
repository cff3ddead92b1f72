//! Candidate route collection for one planning round.

use rd_core::{CatastropheId, NodeId, Tick, VehicleId};
use rd_fleet::{Catastrophe, Vehicle};
use rd_search::{PlanRequest, RoutePlan, RoutePlanner, SearchContext};

use crate::{Candidate, MissionResult};

/// Search every `(catastrophe, vehicle)` pair and group the feasible routes
/// by catastrophe, keeping `active` order and vehicle order.
///
/// `departures[v]` is where and when vehicle `v` is next free to start a
/// new plan.  `fleet` must already reflect any fuel committed before then.
///
/// Each search gets its own scratch copies, so with the `parallel` feature
/// the pairs fan out over Rayon and are merged back in the same order.
pub(crate) fn candidate_routes(
    planner:      &dyn RoutePlanner,
    ctx:          &SearchContext<'_>,
    catastrophes: &[Catastrophe],
    active:       &[CatastropheId],
    fleet:        &[Vehicle],
    departures:   &[(NodeId, Tick)],
) -> MissionResult<Vec<(CatastropheId, Vec<Candidate>)>> {
    let pairs: Vec<(CatastropheId, VehicleId)> = active
        .iter()
        .flat_map(|&c| fleet.iter().map(move |v| (c, v.id)))
        .collect();

    let search = |&(c, v): &(CatastropheId, VehicleId)| -> MissionResult<Option<RoutePlan>> {
        let (origin, start) = departures[v.index()];
        let req = PlanRequest {
            vehicle:     &fleet[v.index()],
            catastrophe: &catastrophes[c.index()],
            origin,
            start,
        };
        Ok(planner.plan(ctx, &req)?)
    };

    #[cfg(not(feature = "parallel"))]
    let plans: Vec<Option<RoutePlan>> = pairs.iter().map(search).collect::<MissionResult<_>>()?;

    #[cfg(feature = "parallel")]
    let plans: Vec<Option<RoutePlan>> = {
        use rayon::prelude::*;
        pairs.par_iter().map(search).collect::<MissionResult<_>>()?
    };

    let mut routes: Vec<(CatastropheId, Vec<Candidate>)> =
        active.iter().map(|&c| (c, Vec::new())).collect();
    for ((c, v), plan) in pairs.into_iter().zip(plans) {
        if let Some(plan) = plan {
            // `pairs` is grouped by catastrophe in `active` order.
            if let Some((_, cands)) = routes.iter_mut().find(|(id, _)| *id == c) {
                cands.push(Candidate { vehicle: v, plan });
            }
        }
    }
    Ok(routes)
}
