//! Table-backed Bayesian network.
//!
//! Each variable stores P(true | parent assignment) for the parent assignments
//! it was given. Declaration order is the enumeration order, so callers must
//! declare parents before children. No acyclicity or completeness checks are
//! made; a missing table row surfaces at query time as
//! [`InferenceError::UndefinedConditional`].
//!
//! ```rust
//! use baynet_core::TableNetwork;
//!
//! let mut net = TableNetwork::new();
//! net.add_root("Rain", 0.2)?
//!     .add_variable("WetGrass", &["Rain"], [([true], 0.9), ([false], 0.1)])?;
//! assert_eq!(net.len(), 2);
//! # Ok::<(), baynet_core::InferenceError>(())
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::engine::errors::InferenceError;
use crate::engine::evidence::Evidence;
use crate::engine::network::{BayesNetwork, VariableNode};

type Assignment = SmallVec<[bool; 4]>;

/// A boolean variable with its conditional probability table.
#[derive(Debug, Clone)]
pub struct TableVariable {
    name: Arc<str>,
    parents: SmallVec<[Arc<str>; 4]>,
    /// P(true | parents = key), keyed by parent values in `parents` order.
    rows: FxHashMap<Assignment, f64>,
}

impl TableVariable {
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    /// Parent identifiers in table-key order.
    pub fn parents(&self) -> &[Arc<str>] {
        &self.parents
    }

    /// P(true) for the given parent assignment, if the table has that row.
    pub fn p_true(&self, assignment: &[bool]) -> Option<f64> {
        self.rows.get(assignment).copied()
    }
}

impl VariableNode<Arc<str>> for TableVariable {
    fn probability(&self, value: bool, evidence: &Evidence<Arc<str>>) -> Result<f64, InferenceError> {
        let mut assignment = Assignment::with_capacity(self.parents.len());
        for parent in &self.parents {
            let parent_value = evidence.get(parent).ok_or_else(|| {
                InferenceError::undefined_conditional(
                    &self.name,
                    format!("parent '{}' has no assigned value", parent),
                )
            })?;
            assignment.push(parent_value);
        }

        let p_true = self.p_true(&assignment).ok_or_else(|| {
            InferenceError::undefined_conditional(
                &self.name,
                format!("no table row for parent assignment {:?}", assignment.as_slice()),
            )
        })?;
        Ok(if value { p_true } else { 1.0 - p_true })
    }
}

/// A Bayesian network whose variables are backed by explicit tables.
#[derive(Debug, Clone, Default)]
pub struct TableNetwork {
    order: Vec<Arc<str>>,
    variables: FxHashMap<Arc<str>, TableVariable>,
}

impl TableNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Declares a parentless variable with prior P(true) = `p_true`.
    pub fn add_root(&mut self, name: &str, p_true: f64) -> Result<&mut Self, InferenceError> {
        let rows: [([bool; 0], f64); 1] = [([], p_true)];
        self.add_variable(name, &[], rows)
    }

    /// Declares a variable conditioned on `parents`.
    ///
    /// Each row pairs a parent assignment (in `parents` order) with P(true).
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::ValidationError`] for a duplicate variable, a
    /// duplicate row, a row whose arity differs from the parent count, or a
    /// probability outside `[0, 1]`.
    pub fn add_variable<R, A>(
        &mut self,
        name: &str,
        parents: &[&str],
        rows: R,
    ) -> Result<&mut Self, InferenceError>
    where
        R: IntoIterator<Item = (A, f64)>,
        A: AsRef<[bool]>,
    {
        if self.variables.contains_key(name) {
            return Err(InferenceError::ValidationError(format!(
                "variable '{}' is already declared",
                name
            )));
        }

        let mut table = FxHashMap::default();
        for (assignment, p_true) in rows {
            let assignment = assignment.as_ref();
            if assignment.len() != parents.len() {
                return Err(InferenceError::ValidationError(format!(
                    "'{}': row {:?} has {} values but the variable has {} parents",
                    name,
                    assignment,
                    assignment.len(),
                    parents.len()
                )));
            }
            if !p_true.is_finite() || !(0.0..=1.0).contains(&p_true) {
                return Err(InferenceError::ValidationError(format!(
                    "'{}': probability {} for row {:?} must be in [0, 1]",
                    name, p_true, assignment
                )));
            }
            if table
                .insert(Assignment::from_slice(assignment), p_true)
                .is_some()
            {
                return Err(InferenceError::ValidationError(format!(
                    "'{}': duplicate row {:?}",
                    name, assignment
                )));
            }
        }

        let name: Arc<str> = Arc::from(name);
        let variable = TableVariable {
            name: name.clone(),
            parents: parents.iter().map(|p| Arc::from(*p)).collect(),
            rows: table,
        };
        self.order.push(name.clone());
        self.variables.insert(name, variable);
        Ok(self)
    }
}

impl BayesNetwork for TableNetwork {
    type Var = Arc<str>;
    type Node = TableVariable;

    fn variable_names(&self) -> &[Arc<str>] {
        &self.order
    }

    fn get_var(&self, name: &Arc<str>) -> Result<&TableVariable, InferenceError> {
        self.variables
            .get(name)
            .ok_or_else(|| InferenceError::UnknownVariable(name.to_string()))
    }
}
