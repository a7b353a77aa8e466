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

//! Computes the least Herbrand model of a set of clauses by forward
//! chaining to a fixpoint (spec §4.C).
//!
//! Evaluation is stratified: predicates are assigned a stratum such that a
//! negated dependency always points at a strictly lower stratum (the
//! standard "negation through recursion" restriction), each stratum is
//! ground to its own local fixpoint using the previous strata's results as
//! already-final background facts, and strata are processed in increasing
//! order. Mixing positive and negative literals in one global sweep (as a
//! literal reading of "repeat until a full pass adds nothing" might
//! suggest) is unsound: a negative check could succeed prematurely, add its
//! head, and then never be retracted once the blocking fact is derived in a
//! later sweep, since `W` only grows. Stratifying first is what makes the
//! final `W` independent of sweep order, as spec §4.C requires.

use std::collections::{BTreeSet, HashMap, HashSet};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::assignment::Assignment;
use crate::error::{FoilError, Result};
use crate::literal::{Atom, Clause, Literal};
use crate::substitute::Substitute;
use crate::term::{Term, Value, Variable};

/// A program is just the set of clauses being reasoned over; background
/// knowledge, the current hypothesis, and a candidate clause are all
/// concatenated into one `Program` before grounding (spec §4.E).
#[derive(Clone, Debug)]
pub struct Program {
    pub clauses: Vec<Clause>,
}

impl Program {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Program { clauses }
    }

    /// The least Herbrand model: the smallest set of ground atoms closed
    /// under every clause, computed over `universe` (every constant
    /// syntactically present in the program, plus any supplied by the
    /// caller — e.g. constants that only ever appear in examples).
    pub fn ground(&self, universe: &BTreeSet<Value>) -> Result<BTreeSet<Atom>> {
        let levels = stratify(&self.clauses)?;

        let mut strata: Vec<Vec<&Clause>> = Vec::new();
        for clause in &self.clauses {
            let level = *levels.get(clause.head.functor.as_str()).unwrap_or(&0);
            if strata.len() <= level {
                strata.resize(level + 1, Vec::new());
            }
            strata[level].push(clause);
        }

        let mut world: BTreeSet<Atom> = BTreeSet::new();
        for (level, stratum) in strata.iter().enumerate() {
            trace!(level, clauses = stratum.len(), "grounding stratum");
            ground_stratum(stratum, universe, &mut world);
        }
        debug!(atoms = world.len(), "grounder reached fixpoint");
        Ok(world)
    }
}

/// Collects every constant that appears syntactically in `clauses` (spec
/// §4.C step 1's first half; the loader adds example-only constants to
/// this before calling `ground`).
pub fn collect_constants(clauses: &[Clause]) -> BTreeSet<Value> {
    let mut constants = BTreeSet::new();
    let mut collect_atom = |atom: &Atom, constants: &mut BTreeSet<Value>| {
        for term in &atom.terms {
            if let Term::Value(v) = term {
                constants.insert(v.clone());
            }
        }
    };
    for clause in clauses {
        collect_atom(&clause.head, &mut constants);
        for lit in &clause.body {
            collect_atom(&lit.atom, &mut constants);
        }
    }
    constants
}

fn ground_stratum(stratum: &[&Clause], universe: &BTreeSet<Value>, world: &mut BTreeSet<Atom>) {
    for clause in stratum {
        if clause.is_fact() {
            world.insert(clause.head.clone());
        }
    }

    loop {
        let snapshot = world.clone();
        let mut grew = false;
        for clause in stratum {
            if clause.is_fact() {
                continue;
            }
            for head_atom in derive(clause, &snapshot, universe) {
                if world.insert(head_atom) {
                    grew = true;
                }
            }
        }
        if !grew {
            break;
        }
    }
}

/// All ground instances of `clause`'s head entailed by `world` (a snapshot
/// held fixed for the duration of this derivation).
fn derive(clause: &Clause, world: &BTreeSet<Atom>, universe: &BTreeSet<Value>) -> Vec<Atom> {
    let mut bindings = vec![Assignment::new()];
    for literal in &clause.body {
        bindings = extend(bindings, literal, world);
        if bindings.is_empty() {
            return Vec::new();
        }
    }

    let free_head_vars: Vec<Variable> = clause
        .head
        .variables()
        .into_iter()
        .filter(|v| !clause.body.iter().any(|l| l.variables().contains(v)))
        .collect();

    let mut heads = Vec::new();
    for binding in &bindings {
        if free_head_vars.is_empty() {
            if let Some(atom) = clause.head.substitute(binding) {
                heads.push(atom);
            }
            continue;
        }
        // Variables quantified universally in the head but absent from the
        // body (spec §3): the clause's conclusion holds for every value of
        // that variable drawn from the universe.
        for combo in std::iter::repeat(universe.iter())
            .take(free_head_vars.len())
            .multi_cartesian_product()
        {
            let mut extended = binding.clone();
            for (var, value) in free_head_vars.iter().zip(combo) {
                extended.insert(var.clone(), value.clone());
            }
            if let Some(atom) = clause.head.substitute(&extended) {
                heads.push(atom);
            }
        }
    }
    heads
}

/// Extends each assignment in `bindings` by matching `literal` against
/// `world` (for a positive literal) or checking its absence (for a negated
/// literal, whose variables must already be bound — the usual Datalog
/// range-restriction / safety requirement).
pub(crate) fn extend(
    bindings: Vec<Assignment>,
    literal: &Literal,
    world: &BTreeSet<Atom>,
) -> Vec<Assignment> {
    if literal.negated {
        return bindings
            .into_iter()
            .filter(|binding| match literal.atom.substitute(binding) {
                Some(ground) => !world.contains(&ground),
                None => false,
            })
            .collect();
    }

    let mut extended = Vec::new();
    for binding in bindings {
        for atom in world.iter().filter(|a| a.functor == literal.atom.functor) {
            if atom.arity() != literal.atom.arity() {
                continue;
            }
            if let Some(next) = unify_atom(&literal.atom, atom, &binding) {
                extended.push(next);
            }
        }
    }
    extended
}

/// Attempts to extend `binding` so that `pattern` (possibly containing
/// variables) matches `fact` (fully ground). Returns `None` on conflict.
fn unify_atom(pattern: &Atom, fact: &Atom, binding: &Assignment) -> Option<Assignment> {
    let mut next = binding.clone();
    for (term, value) in pattern.terms.iter().zip(fact.terms.iter()) {
        let value = value.as_value()?.clone();
        match term {
            Term::Value(v) => {
                if *v != value {
                    return None;
                }
            }
            Term::Variable(var) => match next.get(var) {
                Some(bound) if *bound != value => return None,
                Some(_) => {}
                None => {
                    next.insert(var.clone(), value);
                }
            },
        }
    }
    Some(next)
}

/// Assigns each predicate the smallest stratum consistent with: a negated
/// dependency always points strictly lower, a positive dependency may stay
/// at the same level or lower. Rejects any predicate dependency cycle that
/// passes through a negated edge (spec §7 `Unstratified`).
fn stratify(clauses: &[Clause]) -> Result<HashMap<String, usize>> {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let mut neg_edges: Vec<(String, String)> = Vec::new();
    let mut predicates: HashSet<String> = HashSet::new();

    for clause in clauses {
        predicates.insert(clause.head.functor.clone());
        for literal in &clause.body {
            predicates.insert(literal.atom.functor.clone());
            adjacency
                .entry(clause.head.functor.clone())
                .or_default()
                .push(literal.atom.functor.clone());
            if literal.negated {
                neg_edges.push((clause.head.functor.clone(), literal.atom.functor.clone()));
            }
        }
    }

    for (head, dep) in &neg_edges {
        if reaches(&adjacency, dep, head) {
            return Err(FoilError::Unstratified {
                predicate: head.clone(),
            });
        }
    }

    let mut levels: HashMap<String, usize> = predicates.iter().map(|p| (p.clone(), 0)).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for clause in clauses {
            for literal in &clause.body {
                let dep_level = levels[literal.atom.functor.as_str()];
                let required = if literal.negated {
                    dep_level + 1
                } else {
                    dep_level
                };
                let head_level = levels.get_mut(clause.head.functor.as_str()).unwrap();
                if *head_level < required {
                    *head_level = required;
                    changed = true;
                }
            }
        }
    }
    Ok(levels)
}

/// Whether `to` is reachable from `from` by following dependency edges
/// (head depends on body predicate), irrespective of sign.
fn reaches(adjacency: &HashMap<String, Vec<String>>, from: &str, to: &str) -> bool {
    if from == to {
        return true;
    }
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![from];
    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(next) = adjacency.get(node) {
            for n in next {
                if n == to {
                    return true;
                }
                if !visited.contains(n.as_str()) {
                    stack.push(n.as_str());
                }
            }
        }
    }
    false
}
