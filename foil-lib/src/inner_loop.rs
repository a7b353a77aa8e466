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

//! Choosing the single best literal to append to a clause body under
//! construction (spec §4.G).
//!
//! Each candidate is scored over *examples*, never bindings: `positives`
//! and `negatives` are the same example sets the outer loop tracks, and a
//! candidate's coverage is computed by handing the extended clause to
//! [`crate::coverage::covers`] — the same primitive the outer loop already
//! uses to decide when a clause is done. No separate binding-extension
//! bookkeeping is kept here.

use std::collections::BTreeSet;

use crate::coverage::covers;
use crate::enumerator::Enumerator;
use crate::error::Result;
use crate::literal::{Atom, Clause, Literal, Mask};
use crate::problem::Example;
use crate::scoring::{gain, pruning_bound};
use crate::term::Variable;

/// Appends the highest-gain literal allowed by `masks` to `body`, or
/// `None` if no candidate yields positive gain over the empty-body
/// baseline (the clause should be closed instead, spec §4.G).
pub fn select_literal(
    background: &[Clause],
    hypothesis: &[Clause],
    target: &Literal,
    body: &[Literal],
    masks: &[Mask],
    positives: &BTreeSet<Example>,
    negatives: &BTreeSet<Example>,
) -> Result<Option<Literal>> {
    let p0 = positives.len() as f64;
    let n0 = negatives.len() as f64;

    let mut existing_vars: Vec<Variable> = target.variables();
    for lit in body {
        for v in lit.variables() {
            if !existing_vars.contains(&v) {
                existing_vars.push(v);
            }
        }
    }

    let mut best: Option<(f64, Literal)> = None;

    for mask in masks {
        for terms in Enumerator::new(existing_vars.clone(), mask.arity) {
            let atom = Atom::new(mask.functor.clone(), terms);
            let literal = if mask.negated {
                Literal::negative(atom)
            } else {
                Literal::positive(atom)
            };

            if literal.atom == target.atom || body.contains(&literal) {
                continue;
            }

            let mut extended_body = body.to_vec();
            extended_body.push(literal.clone());
            let candidate = Clause::new(target.atom.clone(), extended_body);

            // `positives_i` is always a subset of `positives` (`covers`
            // only evaluates the examples it is handed), so its size is
            // both `p1` and `t` — the count of positives still covered
            // after the candidate that were covered before.
            let positives_i = covers(background, hypothesis, Some(&candidate), target, positives)?;
            let t = positives_i.len() as f64;

            let bound = pruning_bound(t, p0, n0);
            if let Some((best_gain, _)) = &best {
                if bound <= *best_gain {
                    continue;
                }
            }

            let negatives_i = covers(background, hypothesis, Some(&candidate), target, negatives)?;
            let n1 = negatives_i.len() as f64;

            let candidate_gain = gain(t, p0, n0, t, n1);
            let better = match &best {
                Some((best_gain, _)) => candidate_gain > *best_gain,
                None => candidate_gain > 0.0,
            };
            if better {
                best = Some((candidate_gain, literal));
            }
        }
    }

    Ok(best.map(|(_, literal)| literal))
}
