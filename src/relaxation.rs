//! LP relaxation of the maximum clique problem.
//!
//! One continuous variable per vertex in `[0,1]`, objective `∑ x_v` to be
//! maximized, one `≤ 1` cut per independent set and per non-adjacent pair.
//! A 0/1 feasible point is exactly the indicator vector of a clique, so the
//! LP optimum upper-bounds the maximum clique size of the current feasible
//! region. Branching decisions are temporary `x_v = b` equality constraints
//! pushed and popped on the one shared model.

use crate::instance::VertexId;

/// identifies a branching decision so its fixing can be removed on backtrack
pub type BranchId = usize;

/// constraint direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    /// left-hand side ≤ rhs
    LessEq,
    /// left-hand side = rhs
    Eq,
}

/// a linear constraint `∑ coefs[k] * x[vars[k]]  (≤ | =)  rhs`
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// variable indices of the left-hand side
    pub vars: Vec<usize>,
    /// matching coefficients
    pub coefs: Vec<f64>,
    /// constraint direction
    pub sense: ConstraintSense,
    /// right-hand side
    pub rhs: f64,
}

impl LinearConstraint {
    /// `∑_{v ∈ vars} x_v ≤ 1`
    pub fn at_most_one(vars: Vec<usize>) -> Self {
        let coefs = vec![1.0; vars.len()];
        Self { vars, coefs, sense: ConstraintSense::LessEq, rhs: 1.0 }
    }

    /// `x_var = value`
    pub fn fix(var: usize, value: f64) -> Self {
        Self { vars: vec![var], coefs: vec![1.0], sense: ConstraintSense::Eq, rhs: value }
    }
}

/** the relaxation: objective, bounds, cuts, and the active branching fixings.
built once per solve; only the fixing stack changes during the search. */
#[derive(Debug)]
pub struct RelaxationModel {
    /// number of variables (one per vertex)
    nb_vars: usize,
    /// objective coefficients (all 1.0)
    objective: Vec<f64>,
    /// (lower, upper) bounds per variable (all [0,1])
    bounds: Vec<(f64, f64)>,
    /// independent-set and non-adjacent-pair cuts
    cuts: Vec<LinearConstraint>,
    /// stack of temporary equality fixings along the current search path
    fixings: Vec<(BranchId, LinearConstraint)>,
}

impl RelaxationModel {

    /** builds the model from the vertex count, the independent sets and the
    non-adjacent pairs. always succeeds (the empty graph yields an empty
    model). */
    pub fn new(
        nb_vars: usize,
        ind_sets: &[Vec<VertexId>],
        non_adjacent: &[(VertexId, VertexId)],
    ) -> Self {
        let mut cuts = Vec::with_capacity(ind_sets.len() + non_adjacent.len());
        for set in ind_sets {
            cuts.push(LinearConstraint::at_most_one(set.clone()));
        }
        for (a, b) in non_adjacent {
            cuts.push(LinearConstraint::at_most_one(vec![*a, *b]));
        }
        Self {
            nb_vars,
            objective: vec![1.0; nb_vars],
            bounds: vec![(0.0, 1.0); nb_vars],
            cuts,
            fixings: Vec::new(),
        }
    }

    /// number of variables
    pub fn nb_vars(&self) -> usize { self.nb_vars }

    /// objective coefficients
    pub fn objective(&self) -> &[f64] { &self.objective }

    /// variable bounds
    pub fn bounds(&self) -> &[(f64, f64)] { &self.bounds }

    /// number of cut constraints (without the active fixings)
    pub fn nb_cuts(&self) -> usize { self.cuts.len() }

    /// number of active branching fixings
    pub fn nb_fixings(&self) -> usize { self.fixings.len() }

    /// all active constraints: the cuts, then the fixings in push order
    pub fn constraints(&self) -> impl Iterator<Item = &LinearConstraint> + '_ {
        self.cuts.iter().chain(self.fixings.iter().map(|(_, c)| c))
    }

    /// pushes the temporary constraint `x_var = value`, tagged by `branch`
    pub fn push_fixing(&mut self, branch: BranchId, var: VertexId, value: f64) {
        self.fixings.push((branch, LinearConstraint::fix(var, value)));
    }

    /** removes the most recent fixing. the tag must match: fixings are
    scoped to the search path and must be removed in LIFO order on every
    exit path, otherwise a sibling branch would observe a stale decision. */
    pub fn pop_fixing(&mut self, branch: BranchId) {
        let (top, _) = self.fixings.pop()
            .expect("pop_fixing: no active fixing");
        assert_eq!(top, branch, "pop_fixing: fixings must be removed in LIFO order");
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_dimensions() {
        // path 0-1-2: one independent set {0,2}, one non-edge (0,2)
        let model = RelaxationModel::new(3, &[vec![0, 2]], &[(0, 2)]);
        assert_eq!(model.nb_vars(), 3);
        assert_eq!(model.objective(), &[1.0, 1.0, 1.0]);
        assert_eq!(model.bounds(), &[(0.0, 1.0); 3]);
        assert_eq!(model.nb_cuts(), 2);
        assert_eq!(model.constraints().count(), 2);
    }

    #[test]
    fn test_empty_model() {
        let model = RelaxationModel::new(0, &[], &[]);
        assert_eq!(model.nb_vars(), 0);
        assert_eq!(model.constraints().count(), 0);
    }

    #[test]
    fn test_push_pop_fixings() {
        let mut model = RelaxationModel::new(2, &[], &[(0, 1)]);
        model.push_fixing(1, 0, 1.0);
        model.push_fixing(2, 1, 0.0);
        assert_eq!(model.nb_fixings(), 2);
        assert_eq!(model.constraints().count(), 3);
        {
            let last = model.constraints().last().unwrap();
            assert_eq!(last.vars, vec![1]);
            assert_eq!(last.sense, ConstraintSense::Eq);
            assert_eq!(last.rhs, 0.0);
        }
        model.pop_fixing(2);
        model.pop_fixing(1);
        assert_eq!(model.nb_fixings(), 0);
    }

    #[test]
    #[should_panic(expected = "LIFO")]
    fn test_pop_out_of_order_panics() {
        let mut model = RelaxationModel::new(2, &[], &[]);
        model.push_fixing(1, 0, 1.0);
        model.push_fixing(2, 1, 1.0);
        model.pop_fixing(1);
    }
}
