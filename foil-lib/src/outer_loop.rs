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

//! The covering loop: repeatedly builds one clause via the inner loop and
//! appends it to the hypothesis until every positive example is explained
//! or no clause can be found that explains another one (spec §4.H).

use std::collections::BTreeSet;

use crate::coverage::covers;
use crate::error::Result;
use crate::inner_loop::select_literal;
use crate::literal::{Clause, Literal, Mask};
use crate::problem::{Example, Hypothesis};
use tracing::{debug, info};

/// Builds clauses defining `target` until `positives` is exhausted or a
/// round makes no progress. `background` is never mutated; each
/// constructed clause is folded into the hypothesis passed to the next
/// round's literal search, so later clauses may recurse through earlier
/// ones (and, within one clause's body, through the target itself).
pub fn learn(
    background: &[Clause],
    target: &Literal,
    masks: &[Mask],
    positives: &BTreeSet<Example>,
    negatives: &BTreeSet<Example>,
) -> Result<Hypothesis> {
    let mut hypothesis: Hypothesis = Vec::new();
    let mut remaining: BTreeSet<Example> = positives.clone();

    while !remaining.is_empty() {
        let body = build_clause_body(background, &hypothesis, target, masks, &remaining, negatives)?;
        if body.is_empty() {
            // The inner loop never appended a literal: either no mask helps
            // at all, or every candidate's gain was non-positive. Spec
            // §4.H step 4 says to stop here rather than fold in a
            // `target :- true` clause that would entail the target for
            // every tuple in the universe, negatives included.
            debug!("inner loop produced no literal, stopping outer loop");
            break;
        }
        let clause = Clause::new(target.atom.clone(), body);

        let newly_covered = covers(
            background,
            &hypothesis,
            Some(&clause),
            target,
            &remaining,
        )?;
        if newly_covered.is_empty() {
            debug!(clause = %clause, "candidate clause covers no remaining positives, stopping");
            break;
        }

        info!(clause = %clause, covered = newly_covered.len(), "accepted clause");
        hypothesis.push(clause);
        for example in &newly_covered {
            remaining.remove(example);
        }
    }

    Ok(hypothesis)
}

/// Grows a clause body one literal at a time until either no literal
/// improves on the current body (spec §4.G returns `None`) or the body
/// already covers zero negative examples (spec §4.H's early-stop: a
/// consistent clause need not be specialized further).
fn build_clause_body(
    background: &[Clause],
    hypothesis: &[Clause],
    target: &Literal,
    masks: &[Mask],
    positives: &BTreeSet<Example>,
    negatives: &BTreeSet<Example>,
) -> Result<Vec<Literal>> {
    let mut body: Vec<Literal> = Vec::new();

    loop {
        if !negatives.is_empty() {
            let partial = Clause::new(target.atom.clone(), body.clone());
            let covered_negatives = covers(background, hypothesis, Some(&partial), target, negatives)?;
            if covered_negatives.is_empty() {
                break;
            }
        }

        match select_literal(background, hypothesis, target, &body, masks, positives, negatives)? {
            Some(literal) => body.push(literal),
            None => break,
        }
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Assignment;
    use crate::literal::Atom;
    use crate::problem::Label;
    use crate::term::{Term, Value, Variable};

    fn c(s: &str) -> Term {
        Term::Value(Value::Symbol(s.into()))
    }

    fn v(s: &str) -> Term {
        Term::Variable(Variable::from(s))
    }

    fn target() -> Literal {
        Literal::positive(Atom::new("path", vec![v("X"), v("Y")]))
    }

    fn example(x: &str, y: &str, label: Label) -> Example {
        let mut a = Assignment::new();
        a.insert(Variable::from("X"), Value::Symbol(x.into()));
        a.insert(Variable::from("Y"), Value::Symbol(y.into()));
        Example::new(a, label)
    }

    #[test]
    fn learns_single_hop_edges() {
        let background = vec![
            Clause::fact(Atom::new("edge", vec![c("a"), c("b")])),
            Clause::fact(Atom::new("edge", vec![c("c"), c("d")])),
        ];
        let masks = vec![Mask::new("edge", 2, false)];
        let positives = BTreeSet::from([
            example("a", "b", Label::Positive),
            example("c", "d", Label::Positive),
        ]);
        let negatives = BTreeSet::from([example("a", "d", Label::Negative)]);

        let hypothesis = learn(&background, &target(), &masks, &positives, &negatives).unwrap();
        assert!(!hypothesis.is_empty());

        let covered = covers(&background, &hypothesis, None, &target(), &positives).unwrap();
        assert_eq!(covered.len(), 2);
        let covered_negative =
            covers(&background, &hypothesis, None, &target(), &negatives).unwrap();
        assert!(covered_negative.is_empty());
    }

    #[test]
    fn empty_positives_yield_empty_hypothesis() {
        let hypothesis = learn(&[], &target(), &[], &BTreeSet::new(), &BTreeSet::new()).unwrap();
        assert!(hypothesis.is_empty());
    }

    #[test]
    fn terminates_with_no_usable_masks() {
        // No masks means the inner loop can never append a literal, so the
        // body stays empty on the very first round; spec §4.H step 4 says
        // to stop there rather than accept an empty-bodied clause.
        let background = vec![Clause::fact(Atom::new("edge", vec![c("a"), c("b")]))];
        let positives = BTreeSet::from([example("a", "b", Label::Positive)]);
        let negatives = BTreeSet::from([example("c", "d", Label::Negative)]);

        let hypothesis = learn(&background, &target(), &[], &positives, &negatives).unwrap();
        assert!(hypothesis.is_empty());
    }
}
