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

//! Atoms, literals, clauses, and the mask schema bounding what the inner
//! loop may propose.

use std::fmt;

use crate::term::{Term, Variable};

/// `functor(arg, arg, ...)`. Arity is fixed per functor across a program,
/// but that invariant is enforced by the loader, not by this type.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Atom {
    pub functor: String,
    pub terms: Vec<Term>,
}

impl Atom {
    pub fn new(functor: impl Into<String>, terms: Vec<Term>) -> Self {
        Atom {
            functor: functor.into(),
            terms,
        }
    }

    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    pub fn signature(&self) -> Signature {
        Signature(self.functor.clone(), self.arity())
    }

    pub fn variables(&self) -> Vec<Variable> {
        self.terms
            .iter()
            .filter_map(Term::as_variable)
            .cloned()
            .collect()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            write!(f, "{}", self.functor)
        } else {
            write!(
                f,
                "{}({})",
                self.functor,
                self.terms
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }
    }
}

/// `(functor, arity)`, a predicate's call shape, independent of negation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Signature(pub String, pub usize);

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

/// An atom, possibly negated. Two literals are equal iff functor, terms,
/// and the negation flag all match.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Literal {
    pub atom: Atom,
    pub negated: bool,
}

impl Literal {
    pub fn positive(atom: Atom) -> Self {
        Literal {
            atom,
            negated: false,
        }
    }

    pub fn negative(atom: Atom) -> Self {
        Literal {
            atom,
            negated: true,
        }
    }

    pub fn signature(&self) -> Signature {
        self.atom.signature()
    }

    pub fn variables(&self) -> Vec<Variable> {
        self.atom.variables()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "not {}", self.atom)
        } else {
            write!(f, "{}", self.atom)
        }
    }
}

/// `head :- body.` The head is never negated; an empty body is a fact.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Clause {
    pub head: Atom,
    pub body: Vec<Literal>,
}

impl Clause {
    pub fn fact(head: Atom) -> Self {
        Clause {
            head,
            body: Vec::new(),
        }
    }

    pub fn new(head: Atom, body: Vec<Literal>) -> Self {
        Clause { head, body }
    }

    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }

    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = self.head.variables();
        for lit in &self.body {
            for v in lit.variables() {
                if !vars.contains(&v) {
                    vars.push(v);
                }
            }
        }
        vars
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            write!(f, "{}.", self.head)
        } else {
            write!(
                f,
                "{} :- {}.",
                self.head,
                self.body
                    .iter()
                    .map(|l| l.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }
    }
}

/// A schema bounding the literals the inner loop may introduce into a body:
/// `(functor, arity, negated)`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Mask {
    pub functor: String,
    pub arity: usize,
    pub negated: bool,
}

impl Mask {
    pub fn new(functor: impl Into<String>, arity: usize, negated: bool) -> Self {
        Mask {
            functor: functor.into(),
            arity,
            negated,
        }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "not {}/{}", self.functor, self.arity)
        } else {
            write!(f, "{}/{}", self.functor, self.arity)
        }
    }
}
