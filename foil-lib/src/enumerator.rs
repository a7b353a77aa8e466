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

//! The candidate term-tuple enumerator (spec §4.D).
//!
//! Implemented as a genuine pull `Iterator` holding a mixed-radix counter
//! (an odometer over `0..(arity + |V|)`, one digit per tuple position) and
//! an internal dedup set keyed by the canonicalized tuple — per spec §9's
//! re-architecture guidance, not a mutated external collection.

use std::collections::HashSet;

use crate::term::{Term, Variable};

pub struct Enumerator {
    variables: Vec<Variable>,
    arity: usize,
    base: usize,
    counter: Vec<usize>,
    done: bool,
    visited: HashSet<Vec<Term>>,
}

impl Enumerator {
    /// `variables` is `V`, the set of variables already appearing in
    /// `{target} ∪ body`; duplicates are dropped, preserving first
    /// occurrence, since only membership and index identity matter.
    pub fn new(variables: impl IntoIterator<Item = Variable>, arity: usize) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for v in variables {
            if seen.insert(v.clone()) {
                unique.push(v);
            }
        }
        let base = unique.len() + arity;
        Enumerator {
            variables: unique,
            arity,
            base,
            counter: vec![0; arity],
            done: arity == 0,
            visited: HashSet::new(),
        }
    }

    /// Advances the odometer; sets `done` once every digit has wrapped.
    fn advance(&mut self) {
        for digit in self.counter.iter_mut().rev() {
            *digit += 1;
            if *digit < self.base {
                return;
            }
            *digit = 0;
        }
        self.done = true;
    }

    /// Maps a raw index tuple to a term tuple: indices `< |V|` become the
    /// corresponding existing variable, larger indices become a fresh
    /// variable named by the smallest unused identifier not colliding with
    /// `V`, with distinct indices sharing a name iff they are equal (so a
    /// repeated index within one raw tuple reuses the same fresh
    /// variable). Returns `None` if no position references an existing
    /// variable (an unconstrained candidate, rejected per spec §4.D).
    fn canonicalize(&self, raw: &[usize]) -> Option<Vec<Term>> {
        let mut slot_names: std::collections::HashMap<usize, Variable> = Default::default();
        let mut next_fresh = 0usize;
        let mut uses_existing = false;
        let mut terms = Vec::with_capacity(raw.len());

        for &idx in raw {
            if idx < self.variables.len() {
                uses_existing = true;
                terms.push(Term::Variable(self.variables[idx].clone()));
                continue;
            }
            if let Some(var) = slot_names.get(&idx) {
                terms.push(Term::Variable(var.clone()));
                continue;
            }
            let fresh = loop {
                let candidate = Variable(format!("V{}", next_fresh));
                next_fresh += 1;
                if !self.variables.contains(&candidate) {
                    break candidate;
                }
            };
            slot_names.insert(idx, fresh.clone());
            terms.push(Term::Variable(fresh));
        }

        if uses_existing {
            Some(terms)
        } else {
            None
        }
    }
}

impl Iterator for Enumerator {
    type Item = Vec<Term>;

    fn next(&mut self) -> Option<Vec<Term>> {
        while !self.done {
            let raw = self.counter.clone();
            self.advance();
            if let Some(terms) = self.canonicalize(&raw) {
                if self.visited.insert(terms.clone()) {
                    return Some(terms);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_arity_yields_nothing() {
        let mut e = Enumerator::new(vec![Variable::from("X")], 0);
        assert!(e.next().is_none());
    }

    #[test]
    fn no_existing_variables_yields_nothing() {
        let mut e = Enumerator::new(Vec::new(), 2);
        assert!(e.next().is_none());
    }

    #[test]
    fn every_tuple_uses_at_least_one_existing_variable() {
        let vars = vec![Variable::from("X"), Variable::from("Y")];
        let e = Enumerator::new(vars.clone(), 2);
        for tuple in e {
            assert!(tuple.iter().any(|t| matches!(
                t,
                Term::Variable(v) if vars.contains(v)
            )));
        }
    }

    #[test]
    fn no_duplicate_tuples_are_produced() {
        let vars = vec![Variable::from("X")];
        let e = Enumerator::new(vars, 2);
        let tuples: Vec<_> = e.collect();
        let unique: HashSet<_> = tuples.iter().cloned().collect();
        assert_eq!(tuples.len(), unique.len());
    }

    #[test]
    fn stable_across_runs() {
        let vars = vec![Variable::from("X"), Variable::from("Y")];
        let a: Vec<_> = Enumerator::new(vars.clone(), 2).collect();
        let b: Vec<_> = Enumerator::new(vars, 2).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn includes_reusing_the_same_existing_variable_twice() {
        let vars = vec![Variable::from("X")];
        let e = Enumerator::new(vars.clone(), 2);
        let tuples: Vec<_> = e.collect();
        let xx = vec![
            Term::Variable(Variable::from("X")),
            Term::Variable(Variable::from("X")),
        ];
        assert!(tuples.contains(&xx));
    }

    #[test]
    fn introduces_fresh_variables_named_from_v0() {
        let vars = vec![Variable::from("X")];
        let e = Enumerator::new(vars, 2);
        let has_fresh = e
            .into_iter()
            .any(|t| t.contains(&Term::Variable(Variable::from("V0"))));
        assert!(has_fresh);
    }
}
