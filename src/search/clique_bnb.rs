use std::time::Instant;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::coloring::{self, ColoringStrategy};
use crate::error::ConfigurationError;
use crate::instance::{Clique, Instance, VertexId};
use crate::lp::{LpSolver, SimplexSolver};
use crate::relaxation::{BranchId, RelaxationModel};

/// tolerance under which a relaxation value counts as integral (0 or 1)
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// how the branching variable is selected among the fractional ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchingRule {
    /// pick the fractional variable with the largest value
    LargestValue,
    /// pick the first fractional variable
    FirstFractional,
}

impl Default for BranchingRule {
    fn default() -> Self { BranchingRule::LargestValue }
}

impl std::str::FromStr for BranchingRule {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "largest_value" => Ok(BranchingRule::LargestValue),
            "first_fractional" => Ok(BranchingRule::FirstFractional),
            _ => Err(ConfigurationError::InvalidValue {
                name: "branching", value: s.to_string(),
            }),
        }
    }
}

/** best clique found so far. single writer (the engine), read by every node
for pruning; only grows, and only on strict improvement. */
#[derive(Debug, Clone, Default)]
pub struct Incumbent {
    size: usize,
    clique: Clique,
    nb_updates: u64,
}

impl Incumbent {
    /// records the clique only if strictly larger than the current best
    pub fn accept(&mut self, clique: Clique) -> bool {
        if clique.len() > self.size {
            self.size = clique.len();
            self.clique = clique;
            self.nb_updates += 1;
            true
        } else {
            false
        }
    }

    /// size of the best clique (0 if none found yet)
    pub fn size(&self) -> usize { self.size }

    /// vertices of the best clique
    pub fn clique(&self) -> &[VertexId] { &self.clique }

    /// number of improvements recorded
    pub fn nb_updates(&self) -> u64 { self.nb_updates }
}

/// how the search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    /// the whole tree was explored: the result is proven optimal
    Optimal,
    /// the deadline was reached: the result is the incumbent, not proven optimal
    TimeLimit,
}

/// outcome of a solve call
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// size of the best clique found (0 if none)
    pub size: usize,
    /// vertices of the best clique found
    pub clique: Clique,
    /// termination mode
    pub status: SearchStatus,
    /// objective of the root relaxation (an upper bound on the clique size)
    pub root_bound: Option<f64>,
    /// number of nodes whose relaxation was solved
    pub nodes_explored: u64,
    /// number of nodes pruned (bound check or infeasible relaxation)
    pub nodes_pruned: u64,
    /// search duration in seconds
    pub elapsed: f32,
}

/// one open branching decision on the DFS stack
#[derive(Debug)]
struct Frame {
    /// variable the decision fixes
    var: VertexId,
    /// tag of the active fixing
    branch: BranchId,
    /// true while the x=0 child has not been explored yet
    zero_pending: bool,
    /// best value returned by the children explored so far
    best: usize,
}

/// outcome of evaluating one search node
#[derive(Debug)]
enum NodeEval {
    /// the node is settled (pruned or integral) and contributes this size
    Value(usize),
    /// the assignment is fractional on this variable: branch on it
    Fractional(VertexId),
}

/**
Branch-and-bound over the clique LP relaxation.

Each node solves the relaxation under the fixings of the current search
path. An infeasible or failed relaxation prunes the node; so does a bound
not strictly above the incumbent. An integral assignment is a candidate
clique; a fractional one branches: the selected variable is fixed to 1,
the subtree explored, then the fixing is swapped for 0 and the second
subtree explored. Fixings are pushed and popped on the one shared model,
so memory stays proportional to the search depth.

The recursion is unrolled into an explicit frame stack, so the search depth
is not limited by the call stack.
*/
#[derive(Debug)]
pub struct BranchAndBound<S: LpSolver = SimplexSolver> {
    /// relaxation shared by every node
    model: RelaxationModel,
    /// collaborator solving the relaxations
    solver: S,
    /// branching variable selection rule
    rule: BranchingRule,
    /// best clique found so far
    incumbent: Incumbent,
    /// last branch id handed out
    next_branch: BranchId,
    /// nodes whose relaxation was solved
    nodes_explored: u64,
    /// nodes pruned
    nodes_pruned: u64,
    /// objective of the first relaxation solved
    root_bound: Option<f64>,
}

impl BranchAndBound<SimplexSolver> {

    /// builds the engine for an instance (default strategies and rule)
    pub fn new(inst: &Instance) -> Self {
        Self::with_config(inst, &coloring::DEFAULT_STRATEGIES, BranchingRule::default())
    }

    /// builds the engine with chosen coloring strategies and branching rule
    pub fn with_config(
        inst: &Instance,
        strategies: &[ColoringStrategy],
        rule: BranchingRule,
    ) -> Self {
        let ind_sets = coloring::independent_sets(inst, strategies);
        let model = RelaxationModel::new(inst.n(), &ind_sets, &inst.non_adjacent_pairs());
        Self::with_solver(model, SimplexSolver, rule)
    }
}

impl<S: LpSolver> BranchAndBound<S> {

    /// builds the engine from a model and a custom solver
    pub fn with_solver(model: RelaxationModel, solver: S, rule: BranchingRule) -> Self {
        Self {
            model,
            solver,
            rule,
            incumbent: Incumbent::default(),
            next_branch: 0,
            nodes_explored: 0,
            nodes_pruned: 0,
            root_bound: None,
        }
    }

    /// read access to the relaxation (used by tests to check the fixing stack)
    pub fn model(&self) -> &RelaxationModel { &self.model }

    /// best clique found so far
    pub fn incumbent(&self) -> &Incumbent { &self.incumbent }

    /** runs the search under a wall-clock deadline (seconds).
    the deadline is checked cooperatively at node entry, before each
    relaxation solve: when it expires, every open fixing is removed and the
    incumbent found so far is returned with [`SearchStatus::TimeLimit`]. */
    pub fn solve(&mut self, time_limit: f32) -> SearchResult {
        let start = Instant::now();
        self.incumbent = Incumbent::default();
        self.next_branch = 0;
        self.nodes_explored = 0;
        self.nodes_pruned = 0;
        self.root_bound = None;
        let mut status = SearchStatus::Optimal;
        if self.model.nb_vars() == 0 { // nothing to branch on
            self.root_bound = Some(0.0);
            return self.result(status, start);
        }
        let mut stack: Vec<Frame> = Vec::new();
        // value handed back by the node that just completed (None: entering a node)
        let mut returned: Option<usize> = None;
        loop {
            match returned.take() {
                None => {
                    if start.elapsed().as_secs_f32() >= time_limit {
                        // cooperative cancellation: remove every open fixing before leaving
                        while let Some(frame) = stack.pop() {
                            self.model.pop_fixing(frame.branch);
                        }
                        status = SearchStatus::TimeLimit;
                        break;
                    }
                    match self.evaluate_node() {
                        NodeEval::Value(value) => { returned = Some(value); }
                        NodeEval::Fractional(var) => {
                            self.next_branch += 1;
                            let branch = self.next_branch;
                            self.model.push_fixing(branch, var, 1.0);
                            stack.push(Frame { var, branch, zero_pending: true, best: 0 });
                        }
                    }
                }
                Some(value) => {
                    let frame = match stack.last_mut() {
                        None => break, // the root node itself completed
                        Some(frame) => frame,
                    };
                    if value > frame.best { frame.best = value; }
                    if frame.zero_pending {
                        // swap the x=1 fixing for x=0 and explore the second child
                        self.model.pop_fixing(frame.branch);
                        self.model.push_fixing(frame.branch, frame.var, 0.0);
                        frame.zero_pending = false;
                    } else {
                        // both children done: close the decision and propagate the max
                        self.model.pop_fixing(frame.branch);
                        let best = frame.best;
                        stack.pop();
                        returned = Some(best);
                    }
                }
            }
        }
        debug_assert_eq!(self.model.nb_fixings(), 0);
        self.result(status, start)
    }

    /// solves the relaxation of the current node and decides what to do with it
    fn evaluate_node(&mut self) -> NodeEval {
        self.nodes_explored += 1;
        let values = match self.solver.maximize(&self.model) {
            Ok(values) => values,
            Err(_) => { // infeasible or failed relaxation: no clique below this node
                self.nodes_pruned += 1;
                return NodeEval::Value(0);
            }
        };
        let bound: f64 = values.iter().sum();
        if self.root_bound.is_none() {
            self.root_bound = Some(bound);
        }
        // nothing below this node can strictly beat the incumbent
        if bound <= self.incumbent.size() as f64 + INTEGRALITY_TOLERANCE {
            self.nodes_pruned += 1;
            return NodeEval::Value(0);
        }
        match self.select_branching(&values) {
            Some(var) => NodeEval::Fractional(var),
            None => { // integral assignment: the 1-valued variables form a clique
                let clique: Clique = values.iter().enumerate()
                    .filter(|(_, v)| (**v - 1.0).abs() <= INTEGRALITY_TOLERANCE)
                    .map(|(i, _)| i)
                    .collect();
                let size = clique.len();
                if self.incumbent.accept(clique) {
                    println!("current max clique found: {}", size);
                }
                NodeEval::Value(size)
            }
        }
    }

    /// selects the variable to branch on; None if the assignment is integral
    fn select_branching(&self, values: &[f64]) -> Option<VertexId> {
        let mut fractional = values.iter().enumerate()
            .filter(|(_, v)| is_fractional(**v));
        match self.rule {
            BranchingRule::FirstFractional => fractional.next().map(|(i, _)| i),
            BranchingRule::LargestValue => fractional
                .max_by_key(|(_, v)| OrderedFloat(**v))
                .map(|(i, _)| i),
        }
    }

    fn result(&self, status: SearchStatus, start: Instant) -> SearchResult {
        SearchResult {
            size: self.incumbent.size(),
            clique: self.incumbent.clique().to_vec(),
            status,
            root_bound: self.root_bound,
            nodes_explored: self.nodes_explored,
            nodes_pruned: self.nodes_pruned,
            elapsed: start.elapsed().as_secs_f32(),
        }
    }
}

/// true if the value is not within tolerance of 0 or 1
fn is_fractional(v: f64) -> bool {
    v > INTEGRALITY_TOLERANCE && v < 1.0 - INTEGRALITY_TOLERANCE
}
