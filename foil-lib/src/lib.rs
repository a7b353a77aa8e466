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

//! First-order inductive learning of definite Horn clauses.
//!
//! Given background knowledge, a target relation, a bound on the literals
//! the learner may introduce, and labelled examples of the target, `learn`
//! returns a hypothesis: a set of clauses defining the target that covers
//! every positive example and no negative one, whenever such a hypothesis
//! is reachable by FOIL's greedy covering search.

pub mod assignment;
pub mod cache;
pub mod coverage;
pub mod enumerator;
pub mod error;
pub mod grounder;
pub mod inner_loop;
pub mod literal;
pub mod outer_loop;
pub mod problem;
pub mod scoring;
pub mod substitute;
pub mod term;

pub use cache::Cache;
pub use error::{FoilError, Result};
pub use literal::{Atom, Clause, Literal, Mask};
pub use problem::{Example, Hypothesis, Label, Problem};
pub use term::{Term, Value, Variable};

use tracing::info;

/// Learns a hypothesis for `problem.target`, consulting and then updating
/// `cache` if one is supplied. `problem` is validated first (spec §7); an
/// invalid problem or an unstratified background program is reported to
/// the caller rather than panicking.
pub fn learn(problem: &Problem, cache: Option<&Cache>) -> Result<Hypothesis> {
    problem.validate()?;

    if let Some(cache) = cache {
        if let Some(hit) = cache.get(problem) {
            return Ok(hit);
        }
    }

    info!(
        target = %problem.target,
        positives = problem.positives.len(),
        negatives = problem.negatives.len(),
        "learning hypothesis"
    );

    let hypothesis = outer_loop::learn(
        &problem.clauses,
        &problem.target,
        &problem.masks,
        &problem.positives,
        &problem.negatives,
    )?;

    if let Some(cache) = cache {
        cache.insert(problem.clone(), hypothesis.clone());
    }

    Ok(hypothesis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn path_problem() -> Problem {
        let target = Literal::positive(Atom::new(
            "path",
            vec![
                Term::Variable(Variable::from("X")),
                Term::Variable(Variable::from("Y")),
            ],
        ));
        let background = vec![
            Clause::fact(Atom::new(
                "edge",
                vec![Term::Value(Value::Symbol("a".into())), Term::Value(Value::Symbol("b".into()))],
            )),
            Clause::fact(Atom::new(
                "edge",
                vec![Term::Value(Value::Symbol("b".into())), Term::Value(Value::Symbol("c".into()))],
            )),
        ];
        let masks = vec![Mask::new("edge", 2, false)];

        let mut positive_assignment = assignment::Assignment::new();
        positive_assignment.insert(Variable::from("X"), Value::Symbol("a".into()));
        positive_assignment.insert(Variable::from("Y"), Value::Symbol("b".into()));

        let mut negative_assignment = assignment::Assignment::new();
        negative_assignment.insert(Variable::from("X"), Value::Symbol("c".into()));
        negative_assignment.insert(Variable::from("Y"), Value::Symbol("a".into()));

        Problem::new(
            background,
            target,
            masks,
            BTreeSet::from([Example::positive(positive_assignment)]),
            BTreeSet::from([Example::negative(negative_assignment)]),
        )
    }

    #[test]
    fn learns_and_caches() {
        let problem = path_problem();
        let cache = Cache::new();

        let hypothesis = learn(&problem, Some(&cache)).unwrap();
        assert!(!hypothesis.is_empty());
        assert_eq!(cache.len(), 1);

        let again = learn(&problem, Some(&cache)).unwrap();
        assert_eq!(hypothesis, again);
    }

    #[test]
    fn rejects_invalid_problem() {
        let mut problem = path_problem();
        let overlap = problem.positives.iter().next().unwrap().assignment.clone();
        problem.negatives.insert(Example::negative(overlap));
        assert!(learn(&problem, None).is_err());
    }

    // The six worked scenarios below are a black-box suite over the public
    // `learn` entry point, each one a distinct shape of problem rather than a
    // probe of one module's internals.

    fn atom(functor: &str, args: Vec<Term>) -> Atom {
        Atom::new(functor, args)
    }

    fn sym(s: &str) -> Term {
        Term::Value(Value::Symbol(s.into()))
    }

    fn int(n: i64) -> Term {
        Term::Value(Value::Int(n))
    }

    fn var(s: &str) -> Term {
        Term::Variable(Variable::from(s))
    }

    fn xy(x: Value, y: Value) -> assignment::Assignment {
        let mut a = assignment::Assignment::new();
        a.insert(Variable::from("X"), x);
        a.insert(Variable::from("Y"), y);
        a
    }

    fn sym_xy(x: &str, y: &str) -> assignment::Assignment {
        xy(Value::Symbol(x.into()), Value::Symbol(y.into()))
    }

    fn int_xy(x: i64, y: i64) -> assignment::Assignment {
        xy(Value::Int(x), Value::Int(y))
    }

    #[test]
    fn scenario_grandparent_from_parent_facts() {
        let background = vec![
            Clause::fact(atom("parent", vec![sym("a"), sym("b")])),
            Clause::fact(atom("parent", vec![sym("b"), sym("c")])),
            Clause::fact(atom("parent", vec![sym("b"), sym("d")])),
        ];
        let target = Literal::positive(atom("grandparent", vec![var("X"), var("Y")]));
        let masks = vec![Mask::new("parent", 2, false)];

        let people = ["a", "b", "c", "d"];
        let positive_pairs = [("a", "c"), ("a", "d")];
        let positives: BTreeSet<Example> = positive_pairs
            .iter()
            .map(|&(x, y)| Example::positive(sym_xy(x, y)))
            .collect();
        let negatives: BTreeSet<Example> = people
            .iter()
            .flat_map(|&x| people.iter().map(move |&y| (x, y)))
            .filter(|pair| !positive_pairs.contains(pair))
            .map(|(x, y)| Example::negative(sym_xy(x, y)))
            .collect();

        let problem = Problem::new(
            background.clone(),
            target.clone(),
            masks,
            positives.clone(),
            negatives.clone(),
        );
        let hypothesis = learn(&problem, None).unwrap();
        assert!(!hypothesis.is_empty());

        let covered_pos = coverage::covers(&background, &hypothesis, None, &target, &positives).unwrap();
        assert_eq!(covered_pos, positives);
        let covered_neg = coverage::covers(&background, &hypothesis, None, &target, &negatives).unwrap();
        assert!(covered_neg.is_empty());
    }

    #[test]
    fn scenario_undirected_connectedness_across_components() {
        // A 1-2-3-4 chain of symmetric edges, plus an isolated node 5.
        let edges = [(1, 2), (2, 1), (2, 3), (3, 2), (3, 4), (4, 3)];
        let background: Vec<Clause> = edges
            .iter()
            .map(|&(x, y)| Clause::fact(atom("edge", vec![int(x), int(y)])))
            .collect();

        let target = Literal::positive(atom("connected", vec![var("X"), var("Y")]));
        let masks = vec![
            Mask::new("edge", 2, false),
            Mask::new("connected", 2, false),
        ];

        let component = [1, 2, 3, 4];
        let positives: BTreeSet<Example> = component
            .iter()
            .flat_map(|&x| component.iter().map(move |&y| (x, y)))
            .filter(|&(x, y)| x != y)
            .map(|(x, y)| Example::positive(int_xy(x, y)))
            .collect();
        let negatives: BTreeSet<Example> = component
            .iter()
            .flat_map(|&x| [(x, 5), (5, x)])
            .map(|(x, y)| Example::negative(int_xy(x, y)))
            .collect();

        let problem = Problem::new(
            background.clone(),
            target.clone(),
            masks,
            positives.clone(),
            negatives.clone(),
        );
        let hypothesis = learn(&problem, None).unwrap();
        assert!(!hypothesis.is_empty());

        let covered_pos = coverage::covers(&background, &hypothesis, None, &target, &positives).unwrap();
        assert_eq!(covered_pos, positives);
        let covered_neg = coverage::covers(&background, &hypothesis, None, &target, &negatives).unwrap();
        assert!(covered_neg.is_empty());
    }

    #[test]
    fn scenario_transitive_path_over_a_dag() {
        let edges = [
            (0, 1),
            (0, 3),
            (1, 2),
            (3, 2),
            (3, 4),
            (4, 5),
            (4, 6),
            (6, 8),
            (7, 6),
            (7, 8),
        ];
        let background: Vec<Clause> = edges
            .iter()
            .map(|&(x, y)| Clause::fact(atom("edge", vec![int(x), int(y)])))
            .collect();

        let target = Literal::positive(atom("path", vec![var("X"), var("Y")]));
        let masks = vec![Mask::new("edge", 2, false), Mask::new("path", 2, false)];

        let positive_pairs: [(i64, i64); 19] = [
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (0, 6),
            (0, 8),
            (1, 2),
            (3, 2),
            (3, 4),
            (3, 5),
            (3, 6),
            (3, 8),
            (4, 5),
            (4, 6),
            (4, 8),
            (6, 8),
            (7, 6),
            (7, 8),
        ];
        let positives: BTreeSet<Example> = positive_pairs
            .iter()
            .map(|&(x, y)| Example::positive(int_xy(x, y)))
            .collect();
        let negatives: BTreeSet<Example> = (0..=8)
            .flat_map(|x| (0..=8).map(move |y| (x, y)))
            .filter(|pair| !positive_pairs.contains(pair))
            .map(|(x, y)| Example::negative(int_xy(x, y)))
            .collect();
        assert_eq!(positives.len() + negatives.len(), 81);

        let problem = Problem::new(
            background.clone(),
            target.clone(),
            masks,
            positives.clone(),
            negatives.clone(),
        );
        let hypothesis = learn(&problem, None).unwrap();
        assert!(!hypothesis.is_empty());

        let direct_edge = Example::positive(int_xy(0, 1));
        let covers_direct_edge =
            coverage::covers(&background, &hypothesis, None, &target, [&direct_edge]).unwrap();
        assert!(covers_direct_edge.contains(&direct_edge));

        let covered_pos = coverage::covers(&background, &hypothesis, None, &target, &positives).unwrap();
        assert_eq!(covered_pos, positives);
        let covered_neg = coverage::covers(&background, &hypothesis, None, &target, &negatives).unwrap();
        assert!(covered_neg.is_empty());
    }

    #[test]
    fn scenario_no_positive_examples_yields_the_empty_hypothesis() {
        let target = Literal::positive(atom("path", vec![var("X"), var("Y")]));
        let background = vec![Clause::fact(atom("edge", vec![sym("a"), sym("b")]))];
        let masks = vec![Mask::new("edge", 2, false)];

        let problem = Problem::new(background, target, masks, BTreeSet::new(), BTreeSet::new());
        let hypothesis = learn(&problem, None).unwrap();
        assert!(hypothesis.is_empty());
    }

    #[test]
    fn scenario_positives_already_entailed_by_background() {
        let background = vec![
            Clause::fact(atom("edge", vec![sym("a"), sym("b")])),
            Clause::fact(atom("edge", vec![sym("b"), sym("c")])),
            Clause::fact(atom("edge", vec![sym("a"), sym("c")])),
        ];
        let target = Literal::positive(atom("path", vec![var("X"), var("Y")]));
        let masks = vec![Mask::new("edge", 2, false)];

        let positive_pairs = [("a", "b"), ("b", "c"), ("a", "c")];
        let negative_pairs = [("b", "a"), ("c", "a"), ("c", "b")];
        let positives: BTreeSet<Example> = positive_pairs
            .iter()
            .map(|&(x, y)| Example::positive(sym_xy(x, y)))
            .collect();
        let negatives: BTreeSet<Example> = negative_pairs
            .iter()
            .map(|&(x, y)| Example::negative(sym_xy(x, y)))
            .collect();

        let problem = Problem::new(
            background.clone(),
            target.clone(),
            masks,
            positives.clone(),
            negatives.clone(),
        );
        let hypothesis = learn(&problem, None).unwrap();
        assert!(!hypothesis.is_empty());

        let covered_pos = coverage::covers(&background, &hypothesis, None, &target, &positives).unwrap();
        assert_eq!(covered_pos, positives);
        let covered_neg = coverage::covers(&background, &hypothesis, None, &target, &negatives).unwrap();
        assert!(covered_neg.is_empty());
    }

    #[test]
    fn scenario_no_usable_mask_halts_with_the_empty_hypothesis() {
        let background = vec![Clause::fact(atom("edge", vec![sym("a"), sym("b")]))];
        let target = Literal::positive(atom("path", vec![var("X"), var("Y")]));
        let positives = BTreeSet::from([Example::positive(sym_xy("a", "b"))]);
        let negatives = BTreeSet::from([Example::negative(sym_xy("b", "a"))]);

        let problem = Problem::new(background, target, Vec::new(), positives, negatives);
        let hypothesis = learn(&problem, None).unwrap();
        assert!(hypothesis.is_empty());
    }
}
