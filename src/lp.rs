//! LP solver interface.
//!
//! The search engine only depends on the [`LpSolver`] trait: a model
//! description goes in, a value per variable comes out, or an [`LpFailure`].
//! A failure is never fatal to the search (the node is pruned), so the
//! failure type is a plain enum, not an error chained up the stack.

use good_lp::{constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError,
    Solution, SolverModel, Variable};

use crate::relaxation::{ConstraintSense, RelaxationModel};

/// reasons a relaxation solve may not return values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LpFailure {
    /// the active constraints admit no feasible point
    Infeasible,
    /// the objective is unbounded on the feasible region
    Unbounded,
    /// any other backend failure
    Solver(String),
}

/// contract used by the search engine to solve the current relaxation
pub trait LpSolver {
    /// maximizes the model objective under its active constraints,
    /// returning one value per variable
    fn maximize(&self, model: &RelaxationModel) -> Result<Vec<f64>, LpFailure>;
}

/** solves relaxations with the pure-rust microlp simplex.
the model description is translated into a fresh problem at each call: the
incremental state (cuts + fixing stack) lives in [`RelaxationModel`]. */
#[derive(Debug, Default)]
pub struct SimplexSolver;

impl LpSolver for SimplexSolver {
    fn maximize(&self, model: &RelaxationModel) -> Result<Vec<f64>, LpFailure> {
        if model.nb_vars() == 0 {
            return Ok(Vec::new());
        }
        let mut vars = ProblemVariables::new();
        let x: Vec<Variable> = model.bounds().iter()
            .map(|(lb, ub)| vars.add(variable().min(*lb).max(*ub)))
            .collect();
        let mut objective = Expression::with_capacity(model.nb_vars());
        for (i, xi) in x.iter().enumerate() {
            objective.add_mul(model.objective()[i], *xi);
        }
        let mut problem = vars.maximise(objective).using(default_solver);
        for cst in model.constraints() {
            let mut lhs = Expression::with_capacity(cst.vars.len());
            for (v, coef) in cst.vars.iter().zip(cst.coefs.iter()) {
                lhs.add_mul(*coef, x[*v]);
            }
            match cst.sense {
                ConstraintSense::LessEq => { problem.add_constraint(lhs.leq(cst.rhs)); },
                ConstraintSense::Eq => { problem.add_constraint(constraint::eq(lhs, cst.rhs)); },
            }
        }
        match problem.solve() {
            Ok(assignment) => Ok(x.iter().map(|xi| assignment.value(*xi)).collect()),
            Err(ResolutionError::Infeasible) => Err(LpFailure::Infeasible),
            Err(ResolutionError::Unbounded) => Err(LpFailure::Unbounded),
            Err(e) => Err(LpFailure::Solver(e.to_string())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::relaxation::RelaxationModel;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_unconstrained_model_takes_all_vertices() {
        // complete graph: no cut, every variable at its upper bound
        let model = RelaxationModel::new(3, &[], &[]);
        let values = SimplexSolver.maximize(&model).unwrap();
        assert_eq!(values.len(), 3);
        for v in &values {
            assert!((v - 1.0).abs() <= EPS);
        }
    }

    #[test]
    fn test_path_relaxation_bound() {
        // path 0-1-2: x0+x2 <= 1 twice (independent set + non-edge), optimum 2
        let model = RelaxationModel::new(3, &[vec![0, 2]], &[(0, 2)]);
        let values = SimplexSolver.maximize(&model).unwrap();
        let objective: f64 = values.iter().sum();
        assert!((objective - 2.0).abs() <= EPS, "objective was {}", objective);
        for v in &values {
            assert!(*v >= -EPS && *v <= 1.0 + EPS);
        }
    }

    #[test]
    fn test_fixing_restricts_the_optimum() {
        let mut model = RelaxationModel::new(3, &[vec![0, 2]], &[(0, 2)]);
        model.push_fixing(1, 1, 0.0);
        let values = SimplexSolver.maximize(&model).unwrap();
        let objective: f64 = values.iter().sum();
        assert!((objective - 1.0).abs() <= EPS, "objective was {}", objective);
        assert!(values[1].abs() <= EPS);
        model.pop_fixing(1);
    }

    #[test]
    fn test_contradictory_fixings_are_infeasible() {
        let mut model = RelaxationModel::new(2, &[], &[(0, 1)]);
        model.push_fixing(1, 0, 1.0);
        model.push_fixing(2, 0, 0.0);
        assert_eq!(SimplexSolver.maximize(&model), Err(LpFailure::Infeasible));
    }

    #[test]
    fn test_empty_model() {
        let model = RelaxationModel::new(0, &[], &[]);
        assert_eq!(SimplexSolver.maximize(&model), Ok(Vec::new()));
    }
}
