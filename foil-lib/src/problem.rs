// foil, a first-order inductive learner
// Copyright (C) 2024 FOIL contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The learning problem: background knowledge, the target relation, the
//! literals the learner may use, and the labelled examples it must explain.

use std::collections::BTreeSet;
use std::fmt;

use crate::assignment::Assignment;
use crate::error::FoilError;
use crate::literal::{Clause, Literal, Mask};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub enum Label {
    Positive,
    Negative,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "+"),
            Label::Negative => write!(f, "-"),
        }
    }
}

/// An assignment together with its label. Two examples with the same
/// assignment but different labels are distinct values.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Example {
    pub assignment: Assignment,
    pub label: Label,
}

impl Example {
    pub fn new(assignment: Assignment, label: Label) -> Self {
        Example { assignment, label }
    }

    pub fn positive(assignment: Assignment) -> Self {
        Example::new(assignment, Label::Positive)
    }

    pub fn negative(assignment: Assignment) -> Self {
        Example::new(assignment, Label::Negative)
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.assignment)
    }
}

/// `(background, target, masks, positives, negatives)`. Hashable by
/// structural equality: two problems with the same clauses (in the same
/// order — background/masks are ordered per spec §4.G/§4.H's "for each
/// mask m" iteration) and the same example sets are the same problem.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Problem {
    pub clauses: Vec<Clause>,
    pub target: Literal,
    pub masks: Vec<Mask>,
    pub positives: BTreeSet<Example>,
    pub negatives: BTreeSet<Example>,
}

impl Problem {
    pub fn new(
        clauses: Vec<Clause>,
        target: Literal,
        masks: Vec<Mask>,
        positives: BTreeSet<Example>,
        negatives: BTreeSet<Example>,
    ) -> Self {
        Problem {
            clauses,
            target,
            masks,
            positives,
            negatives,
        }
    }

    /// The §7 `InvalidInput` checks that are cheap enough to run once, up
    /// front, rather than re-checked on every grounding call inside the
    /// search loops.
    pub fn validate(&self) -> Result<(), FoilError> {
        let positive_assignments: std::collections::BTreeSet<&Assignment> =
            self.positives.iter().map(|e| &e.assignment).collect();
        if self
            .negatives
            .iter()
            .any(|e| positive_assignments.contains(&e.assignment))
        {
            return Err(FoilError::invalid_input(
                "an assignment is labelled both positive and negative",
            ));
        }

        let mut arities: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
        for clause in self.clauses.iter() {
            arities.insert(clause.head.functor.as_str(), clause.head.arity());
        }
        for mask in &self.masks {
            if let Some(&expected) = arities.get(mask.functor.as_str()) {
                if expected != mask.arity {
                    return Err(FoilError::invalid_input(format!(
                        "mask {} declares arity {} but background uses arity {}",
                        mask.functor, mask.arity, expected
                    )));
                }
            }
        }

        let target_vars = self.target.variables();
        for example in self.positives.iter().chain(self.negatives.iter()) {
            if !example.assignment.is_total_on(&target_vars) {
                return Err(FoilError::invalid_input(format!(
                    "example {} does not assign every variable of target {}",
                    example, self.target
                )));
            }
        }

        Ok(())
    }
}

/// An ordered list of clauses. Order is observable (a host evaluating a
/// query sees the first matching derivation first) but the model, for the
/// purposes of §8's soundness property, is the union of all clauses.
pub type Hypothesis = Vec<Clause>;
