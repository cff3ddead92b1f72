//! Unit tests for rd-network.
//!
//! All tests use hand-crafted networks.

#[cfg(test)]
mod helpers {
    use rd_core::{AccessLevel, NodeId, TravelMode};

    use crate::{Network, NetworkBuilder};

    /// Four nodes:
    ///
    /// ```text
    ///   A ──land 20── B ──land 25── C
    ///   A ──air  15── B
    ///   A ──water 40─────────────── D
    /// ```
    pub fn small_network() -> (Network, [NodeId; 4]) {
        let mut b = NetworkBuilder::new();
        let a = b.add_node("A").unwrap();
        let nb = b.add_node("B").unwrap();
        let c = b.add_node("C").unwrap();
        let d = b.add_node("D").unwrap();

        b.add_route(a, nb, 20.0, 1.0, TravelMode::Land, AccessLevel::LOW).unwrap();
        b.add_route(a, nb, 15.0, 0.9, TravelMode::Air, AccessLevel::MEDIUM).unwrap();
        b.add_route(nb, c, 25.0, 1.0, TravelMode::Land, AccessLevel::LOW).unwrap();
        b.add_route(a, d, 40.0, 0.8, TravelMode::Water, AccessLevel::HIGH).unwrap();

        (b.build(), [a, nb, c, d])
    }
}

// ── Builder & structure ───────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rd_core::{AccessLevel, TravelMode};

    use crate::{NetworkBuilder, NetworkError};

    #[test]
    fn empty_build() {
        let net = NetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn duplicate_node_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_node("A").unwrap();
        assert!(matches!(b.add_node("A"), Err(NetworkError::DuplicateNode(_))));
    }

    #[test]
    fn negative_distance_rejected() {
        let mut b = NetworkBuilder::new();
        let a = b.add_node("A").unwrap();
        let c = b.add_node("B").unwrap();
        let err = b.add_route(a, c, -1.0, 1.0, TravelMode::Land, AccessLevel::LOW);
        assert!(matches!(err, Err(NetworkError::InvalidEdge { what: "distance", .. })));
    }

    #[test]
    fn zero_speed_multiplier_rejected() {
        let mut b = NetworkBuilder::new();
        let a = b.add_node("A").unwrap();
        let c = b.add_node("B").unwrap();
        assert!(b.add_route(a, c, 1.0, 0.0, TravelMode::Land, AccessLevel::LOW).is_err());
    }

    #[test]
    fn parallel_edges_keep_insertion_order() {
        let (net, [a, b, _, d]) = super::helpers::small_network();
        let out: Vec<_> = net.out_edges(a).map(|e| net.edge(e)).collect();
        assert_eq!(out.len(), 3);
        assert_eq!((out[0].to, out[0].mode), (b, TravelMode::Land));
        assert_eq!((out[1].to, out[1].mode), (b, TravelMode::Air));
        assert_eq!((out[2].to, out[2].mode), (d, TravelMode::Water));
    }

    #[test]
    fn lookup_by_name() {
        let (net, [_, b, ..]) = super::helpers::small_network();
        assert_eq!(net.node("B"), Some(b));
        assert_eq!(net.name(b), "B");
        assert!(net.node("Z").is_none());
        assert!(matches!(net.require_node("Z"), Err(NetworkError::UnknownNode(_))));
    }
}

// ── Destruction ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod destruction {
    use rd_core::Tick;

    use crate::{DestructionSchedule, Destructible};

    #[test]
    fn destroyed_node_hides_incident_edges() {
        let (mut net, [a, b, c, _]) = super::helpers::small_network();
        assert!(net.destroy_node(b));
        assert!(net.node("B").is_none());
        assert!(net.out_edges(a).all(|e| net.edge(e).to != b));
        assert_eq!(net.out_edges(b).count(), 0);
        assert_eq!(net.out_edges(c).count(), 0, "C's only link went through B");
    }

    #[test]
    fn destroying_twice_reports_no_change() {
        let (mut net, [_, b, ..]) = super::helpers::small_network();
        assert!(net.destroy_node(b));
        assert!(!net.destroy_node(b));
    }

    #[test]
    fn link_removes_all_modes_both_directions() {
        let (mut net, [a, b, ..]) = super::helpers::small_network();
        let before = net.live_edge_count();
        assert_eq!(net.destroy_link(b, a), 4);
        assert_eq!(net.live_edge_count(), before - 4);
        assert!(net.out_edges(a).all(|e| net.edge(e).to != b));
        assert_eq!(net.destroy_link(a, b), 0);
    }

    #[test]
    fn clone_is_an_independent_snapshot() {
        let (net, [_, b, ..]) = super::helpers::small_network();
        let mut working = net.clone();
        working.destroy_node(b);
        assert!(net.is_node_alive(b));
        assert!(!working.is_node_alive(b));
    }

    #[test]
    fn schedule_drains_by_tick() {
        let (mut net, [a, b, _, d]) = super::helpers::small_network();
        let mut sched = DestructionSchedule::new();
        sched.node_at(d, Tick(100));
        sched.link_at(a, b, Tick(50));
        sched.node_at(b, Tick(50));
        assert_eq!(sched.len(), 3);
        assert_eq!(sched.next_tick(), Some(Tick(50)));

        assert!(sched.drain_tick(Tick(10)).is_none());
        let due = sched.drain_tick(Tick(50)).unwrap();
        assert_eq!(due, vec![Destructible::Link(a, b), Destructible::Node(b)]);
        assert!(due.into_iter().map(|el| el.apply(&mut net)).all(|changed| changed));
        assert_eq!(sched.len(), 1);
        assert_eq!(sched.next_tick(), Some(Tick(100)));
    }
}

// ── Heuristics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod heuristics {
    use rd_core::NodeId;

    use crate::HeuristicTable;

    #[test]
    fn lookup_by_node_target_category() {
        let mut h = HeuristicTable::new();
        h.insert(NodeId(0), NodeId(2), "car", 45.0);
        h.insert(NodeId(0), NodeId(2), "truck", 60.0);
        assert_eq!(h.get(NodeId(0), NodeId(2), "car"), Some(45.0));
        assert_eq!(h.get(NodeId(0), NodeId(2), "drone"), None);
        assert_eq!(h.get(NodeId(1), NodeId(2), "car"), None);
        assert_eq!(h.len(), 2);
    }
}
