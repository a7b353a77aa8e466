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

//! Deciding which examples a hypothesis (or a hypothesis-in-progress, with
//! one candidate clause appended) explains (spec §4.E).

use std::collections::BTreeSet;

use crate::assignment::Assignment;
use crate::grounder::{collect_constants, Program};
use crate::literal::{Atom, Clause, Literal};
use crate::problem::Example;
use crate::substitute::Substitute;

/// An example is covered iff the target, grounded by the example's
/// assignment, is a member of the least Herbrand model of `background ∪
/// clauses ∪ {extra}` (`extra` lets the inner loop score a candidate clause
/// body without first committing it to the hypothesis).
pub fn covers<'a>(
    background: &[Clause],
    clauses: &[Clause],
    extra: impl IntoIterator<Item = &'a Clause>,
    target: &Literal,
    examples: impl IntoIterator<Item = &'a Example>,
) -> crate::error::Result<BTreeSet<Example>> {
    let mut program_clauses: Vec<Clause> = background.to_vec();
    program_clauses.extend(clauses.iter().cloned());
    program_clauses.extend(extra.into_iter().cloned());

    let examples: Vec<&Example> = examples.into_iter().collect();
    let mut universe = collect_constants(&program_clauses);
    for example in &examples {
        for (_, value) in example.assignment.iter() {
            universe.insert(value.clone());
        }
    }

    let world = Program::new(program_clauses).ground(&universe)?;

    let mut covered = BTreeSet::new();
    for example in examples {
        if target_holds(target, &example.assignment, &world) {
            covered.insert(example.clone());
        }
    }
    Ok(covered)
}

/// Whether `target`, substituted by `assignment`, is in `world`. `target`
/// is never negated (spec's target relation is always a plain atom).
fn target_holds(target: &Literal, assignment: &Assignment, world: &BTreeSet<Atom>) -> bool {
    match target.atom.substitute(assignment) {
        Some(ground) => world.contains(&ground) != target.negated,
        None => false,
    }
}
