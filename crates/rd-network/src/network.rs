//! Transport network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node (stable, so parallel edges keep
//! their insertion order) and indexed by `EdgeId`.  Several edges may join
//! the same pair of nodes with different travel modes and costs.
//!
//! # Destruction
//!
//! CSR arrays are immutable once built.  Destruction flips liveness flags
//! instead: `node_alive` and `edge_alive`.  A destroyed element is gone for
//! the rest of the run; every traversal helper skips dead edges and edges
//! whose endpoint is dead.

use std::collections::HashMap;

use tracing::debug;

use rd_core::{AccessLevel, EdgeId, NodeId, TravelMode};

use crate::{NetworkError, NetworkResult};

// ── Edge view ─────────────────────────────────────────────────────────────────

/// A copy of one directed edge's attributes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:             NodeId,
    pub to:               NodeId,
    /// Length in kilometres.
    pub distance_km:      f64,
    /// Scales vehicle speed on this edge (1.0 = nominal).
    pub speed_multiplier: f64,
    pub mode:             TravelMode,
    /// Minimum access level a vehicle needs to use the edge.
    pub access:           AccessLevel,
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Directed transport graph in CSR format with per-element liveness.
///
/// Cheap to query, `Clone` for baseline snapshots.  Construct with
/// [`NetworkBuilder`].
#[derive(Clone, Debug)]
pub struct Network {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Name of each node.  Indexed by `NodeId`.
    pub node_name: Vec<String>,

    /// `false` once the node has been destroyed.
    pub node_alive: Vec<bool>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    pub edge_from:        Vec<NodeId>,
    pub edge_to:          Vec<NodeId>,
    pub edge_distance_km: Vec<f64>,
    pub edge_speed_mult:  Vec<f64>,
    pub edge_mode:        Vec<TravelMode>,
    pub edge_access:      Vec<AccessLevel>,

    /// `false` once the edge has been destroyed.
    pub edge_alive: Vec<bool>,

    name_index: HashMap<String, NodeId>,
}

impl Network {
    /// Construct an empty network with no nodes or edges.
    pub fn empty() -> Self {
        NetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_name.is_empty()
    }

    /// Number of edges still standing.
    pub fn live_edge_count(&self) -> usize {
        (0..self.edge_count())
            .filter(|&i| self.is_edge_alive(EdgeId(i as u32)))
            .count()
    }

    // ── Node lookup ───────────────────────────────────────────────────────

    /// Resolve a node by name.  Destroyed nodes do not resolve.
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.name_index
            .get(name)
            .copied()
            .filter(|&id| self.is_node_alive(id))
    }

    /// Resolve a node by name, dead or alive, for configuration-time lookups.
    pub fn require_node(&self, name: &str) -> NetworkResult<NodeId> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownNode(name.to_owned()))
    }

    /// Name of `node`.  Panics if `node` is out of range.
    #[inline]
    pub fn name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    #[inline]
    pub fn is_node_alive(&self, node: NodeId) -> bool {
        self.node_alive.get(node.index()).copied().unwrap_or(false)
    }

    /// An edge is usable only if it and both endpoints are alive.
    #[inline]
    pub fn is_edge_alive(&self, edge: EdgeId) -> bool {
        let i = edge.index();
        self.edge_alive[i]
            && self.node_alive[self.edge_from[i].index()]
            && self.node_alive[self.edge_to[i].index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the live outgoing edges of `node`, in insertion order.
    ///
    /// Yields nothing for a destroyed node.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let (start, end) = if self.is_node_alive(node) {
            (
                self.node_out_start[node.index()] as usize,
                self.node_out_start[node.index() + 1] as usize,
            )
        } else {
            (0, 0)
        };
        (start..end)
            .map(|i| EdgeId(i as u32))
            .filter(move |&e| self.is_edge_alive(e))
    }

    /// Attributes of `edge`.
    #[inline]
    pub fn edge(&self, edge: EdgeId) -> Edge {
        let i = edge.index();
        Edge {
            from:             self.edge_from[i],
            to:               self.edge_to[i],
            distance_km:      self.edge_distance_km[i],
            speed_multiplier: self.edge_speed_mult[i],
            mode:             self.edge_mode[i],
            access:           self.edge_access[i],
        }
    }

    // ── Destruction ───────────────────────────────────────────────────────

    /// Remove `node` (and implicitly every incident edge).
    ///
    /// Returns `true` if the node was alive before the call.
    pub fn destroy_node(&mut self, node: NodeId) -> bool {
        match self.node_alive.get_mut(node.index()) {
            Some(alive) if *alive => {
                *alive = false;
                debug!(node = %self.node_name[node.index()], "node destroyed");
                true
            }
            _ => false,
        }
    }

    /// Remove every edge joining `a` and `b`, in both directions and all
    /// modes.  Returns the number of edges that were alive before the call.
    pub fn destroy_link(&mut self, a: NodeId, b: NodeId) -> usize {
        let mut removed = 0;
        for i in 0..self.edge_count() {
            let (from, to) = (self.edge_from[i], self.edge_to[i]);
            let joins = (from == a && to == b) || (from == b && to == a);
            if joins && self.edge_alive[i] {
                self.edge_alive[i] = false;
                removed += 1;
            }
        }
        if removed > 0 {
            debug!(
                a = %self.node_name[a.index()],
                b = %self.node_name[b.index()],
                removed,
                "link destroyed"
            );
        }
        removed
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rd_core::{AccessLevel, TravelMode};
/// use rd_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// let a = b.add_node("A").unwrap();
/// let c = b.add_node("B").unwrap();
/// b.add_route(a, c, 30.0, 1.0, TravelMode::Land, AccessLevel::LOW).unwrap();
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct NetworkBuilder {
    names:      Vec<String>,
    name_index: HashMap<String, NodeId>,
    raw_edges:  Vec<Edge>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self {
            names:      Vec::new(),
            name_index: HashMap::new(),
            raw_edges:  Vec::new(),
        }
    }

    /// Add a named node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, name: &str) -> NetworkResult<NodeId> {
        if self.name_index.contains_key(name) {
            return Err(NetworkError::DuplicateNode(name.to_owned()));
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.name_index.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Look up a node added earlier.
    pub fn node(&self, name: &str) -> NetworkResult<NodeId> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownNode(name.to_owned()))
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_directed_edge(
        &mut self,
        from:             NodeId,
        to:               NodeId,
        distance_km:      f64,
        speed_multiplier: f64,
        mode:             TravelMode,
        access:           AccessLevel,
    ) -> NetworkResult<()> {
        for id in [from, to] {
            if id.index() >= self.names.len() {
                return Err(NetworkError::UnknownNode(id.to_string()));
            }
        }
        let invalid = |what| NetworkError::InvalidEdge {
            from: self.names[from.index()].clone(),
            to:   self.names[to.index()].clone(),
            what,
        };
        if distance_km.is_nan() || distance_km < 0.0 {
            return Err(invalid("distance"));
        }
        if speed_multiplier.is_nan() || speed_multiplier <= 0.0 {
            return Err(invalid("speed multiplier"));
        }
        self.raw_edges.push(Edge { from, to, distance_km, speed_multiplier, mode, access });
        Ok(())
    }

    /// Convenience: add edges in **both directions** sharing the same
    /// attributes (the common case for every bundled scenario).
    pub fn add_route(
        &mut self,
        a:                NodeId,
        b:                NodeId,
        distance_km:      f64,
        speed_multiplier: f64,
        mode:             TravelMode,
        access:           AccessLevel,
    ) -> NetworkResult<()> {
        self.add_directed_edge(a, b, distance_km, speed_multiplier, mode, access)?;
        self.add_directed_edge(b, a, distance_km, speed_multiplier, mode, access)
    }

    pub fn node_count(&self) -> usize { self.names.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`Network`].
    pub fn build(self) -> Network {
        let node_count = self.names.len();
        let edge_count = self.raw_edges.len();

        // Stable sort keeps parallel edges in insertion order, which is the
        // tie-break order every planner relies on.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        Network {
            node_alive:       vec![true; node_count],
            node_name:        self.names,
            node_out_start,
            edge_from:        raw.iter().map(|e| e.from).collect(),
            edge_to:          raw.iter().map(|e| e.to).collect(),
            edge_distance_km: raw.iter().map(|e| e.distance_km).collect(),
            edge_speed_mult:  raw.iter().map(|e| e.speed_multiplier).collect(),
            edge_mode:        raw.iter().map(|e| e.mode).collect(),
            edge_access:      raw.iter().map(|e| e.access).collect(),
            edge_alive:       vec![true; edge_count],
            name_index:       self.name_index,
        }
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
