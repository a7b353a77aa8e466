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

//! Reads a problem file's parsed items into a validated `foil_lib::Problem`.
//!
//! A problem file has four logical sections, freely interleaved in any
//! order by [`crate::parser`]: background clauses, a single `?-` target
//! declaration, `::` mask declarations, and `+`/`-`-prefixed ground example
//! facts. This is ambient CLI-side plumbing (spec §6's "example loader" and
//! "mask source" collaborators) — `foil_lib` never parses anything itself.
//!
//! Grounded on `examples/original_source/.../simplified/problem.py`'s
//! section layout (background facts, then target, then examples) for the
//! file's overall shape, translated into this workspace's own idiom rather
//! than ported line for line.

use std::collections::BTreeSet;

use thiserror::Error;

use foil_lib::{Assignment, Atom, Example, Literal, Problem};

use crate::parser::{self, Item, ParseError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no target declared (expected a `?- target(...).` line)")]
    NoTarget,

    #[error("multiple target declarations found; only one `?- ...` line is allowed")]
    MultipleTargets,

    #[error("example {atom} does not match the target's functor/arity")]
    ExampleShapeMismatch { atom: String },

    #[error("example {atom} is not ground")]
    ExampleNotGround { atom: String },

    #[error(transparent)]
    Invalid(#[from] foil_lib::FoilError),
}

/// Parses and loads `source` into a `Problem`, eagerly running every §7
/// `InvalidInput` check so a caller gets a source-level diagnostic instead
/// of a malformed `Problem` reaching `foil_lib::learn`.
pub fn load(source: &str) -> Result<Problem, LoadError> {
    let items = parser::parse_file(source)?;

    let mut clauses = Vec::new();
    let mut masks = Vec::new();
    let mut target: Option<Literal> = None;
    let mut raw_examples = Vec::new();

    for item in items {
        match item {
            Item::Clause(clause) => clauses.push(clause),
            Item::Mask(mask) => masks.push(mask),
            Item::Target(literal) => {
                if target.is_some() {
                    return Err(LoadError::MultipleTargets);
                }
                target = Some(literal);
            }
            // The target may be declared after the examples that refer to
            // it, so resolving each example against `target` has to wait
            // until the whole file has been scanned.
            Item::Example { atom, positive } => raw_examples.push((atom, positive)),
        }
    }

    let target = target.ok_or(LoadError::NoTarget)?;

    let mut positives = BTreeSet::new();
    let mut negatives = BTreeSet::new();
    for (atom, positive) in raw_examples {
        let assignment = assignment_from_atom(&target, &atom)?;
        if positive {
            positives.insert(Example::positive(assignment));
        } else {
            negatives.insert(Example::negative(assignment));
        }
    }

    let problem = Problem::new(clauses, target, masks, positives, negatives);
    problem.validate()?;
    Ok(problem)
}

/// An example's ground atom (`path(a, b)`) positionally rebinds the
/// target's variables (`path(X, Y)`) into an `Assignment` (`{X: a, Y: b}`),
/// since `Problem`'s examples are assignments, not atoms (spec §3).
fn assignment_from_atom(target: &Literal, atom: &Atom) -> Result<Assignment, LoadError> {
    if atom.functor != target.atom.functor || atom.arity() != target.atom.arity() {
        return Err(LoadError::ExampleShapeMismatch {
            atom: atom.to_string(),
        });
    }

    let mut assignment = Assignment::new();
    for (target_term, example_term) in target.atom.terms.iter().zip(atom.terms.iter()) {
        let var = target_term
            .as_variable()
            .ok_or_else(|| LoadError::ExampleShapeMismatch {
                atom: atom.to_string(),
            })?;
        let value = example_term
            .as_value()
            .ok_or_else(|| LoadError::ExampleNotGround {
                atom: atom.to_string(),
            })?;
        assignment.insert(var.clone(), value.clone());
    }
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_well_formed_problem() {
        let source = "
            edge(a, b).
            edge(b, c).

            :: edge/2

            ?- path(X, Y).

            + path(a, b).
            - path(b, a).
        ";
        let problem = load(source).unwrap();
        assert_eq!(problem.positives.len(), 1);
        assert_eq!(problem.negatives.len(), 1);
        assert_eq!(problem.masks.len(), 1);
    }

    #[test]
    fn rejects_examples_when_no_target_is_declared_anywhere() {
        let result = load("+ path(a, b).");
        assert!(matches!(result, Err(LoadError::NoTarget)));
    }

    #[test]
    fn accepts_examples_declared_before_the_target() {
        let source = "
            edge(a, b).

            + path(a, b).
            - path(b, a).

            ?- path(X, Y).
        ";
        let problem = load(source).unwrap();
        assert_eq!(problem.positives.len(), 1);
        assert_eq!(problem.negatives.len(), 1);
    }

    #[test]
    fn rejects_a_second_target_declaration() {
        let source = "
            ?- path(X, Y).
            ?- path(X, Y).
        ";
        assert!(matches!(load(source), Err(LoadError::MultipleTargets)));
    }

    #[test]
    fn rejects_an_example_with_the_wrong_arity() {
        let source = "
            ?- path(X, Y).
            + path(a).
        ";
        assert!(matches!(
            load(source),
            Err(LoadError::ExampleShapeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_an_assignment_labelled_both_ways() {
        let source = "
            ?- path(X, Y).
            + path(a, b).
            - path(a, b).
        ";
        assert!(matches!(load(source), Err(LoadError::Invalid(_))));
    }
}
