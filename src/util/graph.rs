use {
    num::Zero,
    std::{
        cmp::Ordering,
        collections::{BinaryHeap, VecDeque},
        hash::Hash,
        ops::Add,
    },
};

pub struct OpenSetElement<V, C>(pub V, pub C);

impl<V, C: Ord> PartialEq for OpenSetElement<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<V, C: Ord> Eq for OpenSetElement<V, C> {}

impl<V, C: Ord> PartialOrd for OpenSetElement<V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, C: Ord> Ord for OpenSetElement<V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the order so that cost is minimized when popping from the heap
        other.1.cmp(&self.1)
    }
}

pub fn zero_heuristic<W: WeightedGraphSearch + ?Sized>(
    _search: &W,
    _vertex: &W::Vertex,
) -> W::Cost {
    W::Cost::zero()
}

/// An implementation of https://en.wikipedia.org/wiki/A*_search_algorithm and
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Stale open set entries are skipped when popped instead of being re-keyed in place, so
/// `cost_from_start` must reflect the most recent `update_vertex` call for a given vertex.
pub trait WeightedGraphSearch {
    type Vertex: Clone + Eq + Hash;
    type Cost: Add<Self::Cost, Output = Self::Cost> + Clone + Ord + Sized + Zero;

    fn start(&self) -> &Self::Vertex;
    fn is_end(&self, vertex: &Self::Vertex) -> bool;
    fn path_to(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;
    fn cost_from_start(&self, vertex: &Self::Vertex) -> Self::Cost;
    fn heuristic(&self, vertex: &Self::Vertex) -> Self::Cost;

    /// The cost is from `vertex` to the neighbor.
    fn neighbors(
        &self,
        vertex: &Self::Vertex,
        neighbors: &mut Vec<OpenSetElement<Self::Vertex, Self::Cost>>,
    );

    fn update_vertex(&mut self, from: &Self::Vertex, to: &Self::Vertex, cost: Self::Cost);
    fn reset(&mut self);

    fn run_internal<F: Fn(&Self, &Self::Vertex) -> Self::Cost>(
        &mut self,
        heuristic: F,
    ) -> Option<Vec<Self::Vertex>> {
        self.reset();

        let start: Self::Vertex = self.start().clone();
        let mut open_set: BinaryHeap<OpenSetElement<Self::Vertex, Self::Cost>> = BinaryHeap::new();
        let mut neighbors: Vec<OpenSetElement<Self::Vertex, Self::Cost>> = Vec::new();

        open_set.push(OpenSetElement(start.clone(), heuristic(self, &start)));

        while let Some(OpenSetElement(current, estimated_cost)) = open_set.pop() {
            let start_to_current: Self::Cost = self.cost_from_start(&current);

            if estimated_cost > start_to_current.clone() + heuristic(self, &current) {
                // A cheaper route to this vertex was found after this element was pushed.
                continue;
            }

            if self.is_end(&current) {
                return Some(self.path_to(&current));
            }

            self.neighbors(&current, &mut neighbors);

            for OpenSetElement(neighbor, current_to_neighbor) in neighbors.drain(..) {
                let start_to_neighbor: Self::Cost =
                    start_to_current.clone() + current_to_neighbor;

                if start_to_neighbor < self.cost_from_start(&neighbor) {
                    self.update_vertex(&current, &neighbor, start_to_neighbor.clone());
                    open_set.push(OpenSetElement(
                        neighbor.clone(),
                        start_to_neighbor + heuristic(self, &neighbor),
                    ));
                }
            }
        }

        None
    }

    fn run_a_star(&mut self) -> Option<Vec<Self::Vertex>> {
        self.run_internal(Self::heuristic)
    }

    fn run_dijkstra(&mut self) -> Option<Vec<Self::Vertex>> {
        self.run_internal(zero_heuristic::<Self>)
    }
}

pub struct KahnState<V> {
    pub list: Vec<V>,
    set: VecDeque<V>,
    neighbors: Vec<V>,
}

impl<V> Default for KahnState<V> {
    fn default() -> Self {
        Self {
            list: Default::default(),
            set: Default::default(),
            neighbors: Default::default(),
        }
    }
}

/// An implementation of [Kahn's Algorithm][kahn] for producing a topological sort of a DAG.
///
/// [kahn]: https://en.wikipedia.org/wiki/Topological_sorting#Kahn%27s_algorithm
pub trait Kahn {
    type Vertex: Clone;

    fn populate_initial_set(&self, initial_set: &mut VecDeque<Self::Vertex>);
    fn out_neighbors(&self, vertex: &Self::Vertex, neighbors: &mut Vec<Self::Vertex>);
    fn remove_edge(&mut self, from: &Self::Vertex, to: &Self::Vertex);
    fn has_in_neighbors(&self, vertex: &Self::Vertex) -> bool;
    fn any_edges_exist(&self) -> bool;
    fn reset(&mut self);

    fn run_internal(&mut self, state: &mut KahnState<Self::Vertex>) -> bool {
        state.list.clear();
        state.set.clear();
        state.neighbors.clear();

        self.reset();
        self.populate_initial_set(&mut state.set);

        while let Some(vertex) = state.set.pop_front() {
            state.list.push(vertex.clone());
            state.neighbors.clear();
            self.out_neighbors(&vertex, &mut state.neighbors);

            for neighbor in state.neighbors.drain(..) {
                self.remove_edge(&vertex, &neighbor);

                if !self.has_in_neighbors(&neighbor) {
                    state.set.push_back(neighbor);
                }
            }
        }

        !self.any_edges_exist()
    }

    fn run(&mut self) -> Option<Vec<Self::Vertex>> {
        let mut state: KahnState<Self::Vertex> = KahnState::default();

        self.run_internal(&mut state).then_some(state.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SmallWeightedGraph {
        edges: Vec<Vec<(usize, u32)>>,
        start: usize,
        end: usize,
        costs: Vec<u32>,
        predecessors: Vec<Option<usize>>,
    }

    impl SmallWeightedGraph {
        fn new(vertex_count: usize, edges: Vec<Vec<(usize, u32)>>, end: usize) -> Self {
            Self {
                edges,
                start: 0_usize,
                end,
                costs: vec![u32::MAX; vertex_count],
                predecessors: vec![None; vertex_count],
            }
        }
    }

    impl WeightedGraphSearch for SmallWeightedGraph {
        type Vertex = usize;
        type Cost = u32;

        fn start(&self) -> &usize {
            &self.start
        }

        fn is_end(&self, vertex: &usize) -> bool {
            *vertex == self.end
        }

        fn path_to(&self, vertex: &usize) -> Vec<usize> {
            let mut path: Vec<usize> = vec![*vertex];

            while let Some(predecessor) = self.predecessors[path[path.len() - 1_usize]] {
                path.push(predecessor);
            }

            path.reverse();

            path
        }

        fn cost_from_start(&self, vertex: &usize) -> u32 {
            self.costs[*vertex]
        }

        fn heuristic(&self, _vertex: &usize) -> u32 {
            0_u32
        }

        fn neighbors(&self, vertex: &usize, neighbors: &mut Vec<OpenSetElement<usize, u32>>) {
            neighbors.clear();
            neighbors.extend(
                self.edges[*vertex]
                    .iter()
                    .map(|(neighbor, cost)| OpenSetElement(*neighbor, *cost)),
            );
        }

        fn update_vertex(&mut self, from: &usize, to: &usize, cost: u32) {
            self.costs[*to] = cost;
            self.predecessors[*to] = Some(*from);
        }

        fn reset(&mut self) {
            self.costs.fill(u32::MAX);
            self.predecessors.fill(None);
            self.costs[self.start] = 0_u32;
        }
    }

    struct SmallDag {
        original_edges: Vec<(usize, usize)>,
        edges: Vec<(usize, usize)>,
        vertex_count: usize,
    }

    impl Kahn for SmallDag {
        type Vertex = usize;

        fn populate_initial_set(&self, initial_set: &mut VecDeque<usize>) {
            initial_set.extend(
                (0_usize..self.vertex_count)
                    .filter(|vertex| !self.edges.iter().any(|(_, to)| to == vertex)),
            );
        }

        fn out_neighbors(&self, vertex: &usize, neighbors: &mut Vec<usize>) {
            neighbors.extend(
                self.edges
                    .iter()
                    .filter(|(from, _)| from == vertex)
                    .map(|(_, to)| *to),
            );
        }

        fn remove_edge(&mut self, from: &usize, to: &usize) {
            self.edges.retain(|edge| *edge != (*from, *to));
        }

        fn has_in_neighbors(&self, vertex: &usize) -> bool {
            self.edges.iter().any(|(_, to)| to == vertex)
        }

        fn any_edges_exist(&self) -> bool {
            !self.edges.is_empty()
        }

        fn reset(&mut self) {
            self.edges = self.original_edges.clone();
        }
    }

    #[test]
    fn test_dijkstra() {
        // 0 -> 1 -> 3 is shorter than the direct 0 -> 3 edge.
        let mut graph: SmallWeightedGraph = SmallWeightedGraph::new(
            4_usize,
            vec![
                vec![(1_usize, 1_u32), (2_usize, 4_u32), (3_usize, 7_u32)],
                vec![(3_usize, 2_u32)],
                vec![(3_usize, 1_u32)],
                vec![],
            ],
            3_usize,
        );

        assert_eq!(graph.run_dijkstra(), Some(vec![0_usize, 1_usize, 3_usize]));
        assert_eq!(graph.cost_from_start(&3_usize), 3_u32);
        assert_eq!(graph.run_a_star(), Some(vec![0_usize, 1_usize, 3_usize]));
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let mut graph: SmallWeightedGraph =
            SmallWeightedGraph::new(2_usize, vec![vec![], vec![]], 1_usize);

        assert_eq!(graph.run_dijkstra(), None);
    }

    #[test]
    fn test_kahn() {
        let mut dag: SmallDag = SmallDag {
            original_edges: vec![
                (0_usize, 1_usize),
                (0_usize, 2_usize),
                (1_usize, 3_usize),
                (2_usize, 3_usize),
            ],
            edges: Vec::new(),
            vertex_count: 4_usize,
        };

        assert_eq!(dag.run(), Some(vec![0_usize, 1_usize, 2_usize, 3_usize]));
    }

    #[test]
    fn test_kahn_cycle() {
        let mut dag: SmallDag = SmallDag {
            original_edges: vec![(0_usize, 1_usize), (1_usize, 0_usize)],
            edges: Vec::new(),
            vertex_count: 2_usize,
        };

        assert_eq!(dag.run(), None);
    }
}
