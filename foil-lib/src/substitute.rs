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

//! Applying an assignment to a term, atom, or literal.
//!
//! The core never needs to unify two open terms against each other (unlike
//! the teacher's `unification` module, built for top-down SLD resolution):
//! the grounder and the coverage evaluator only ever substitute a
//! *complete* assignment into a clause or literal, so this module is just
//! `apply`, not `mgu`.

use crate::assignment::Assignment;
use crate::literal::{Atom, Literal};
use crate::term::{Term, Value};

/// Applying `s` to `self` yields `Output`, which is ground whenever `s` is
/// total over `self`'s variables.
pub trait Substitute {
    type Output;

    /// Returns `None` if `s` does not bind every variable `self` mentions.
    fn substitute(&self, s: &Assignment) -> Option<Self::Output>;
}

impl Substitute for Term {
    type Output = Value;

    fn substitute(&self, s: &Assignment) -> Option<Value> {
        match self {
            Term::Value(v) => Some(v.clone()),
            Term::Variable(v) => s.get(v).cloned(),
        }
    }
}

impl Substitute for Atom {
    type Output = Atom;

    fn substitute(&self, s: &Assignment) -> Option<Atom> {
        let terms = self
            .terms
            .iter()
            .map(|t| t.substitute(s).map(Term::Value))
            .collect::<Option<Vec<_>>>()?;
        Some(Atom::new(self.functor.clone(), terms))
    }
}

impl Substitute for Literal {
    type Output = Literal;

    fn substitute(&self, s: &Assignment) -> Option<Literal> {
        let atom = self.atom.substitute(s)?;
        Some(Literal {
            atom,
            negated: self.negated,
        })
    }
}

/// A value is trivially ground; a literal/atom is ground iff it mentions no
/// variables.
pub trait Ground {
    fn is_ground(&self) -> bool;
}

impl Ground for Atom {
    fn is_ground(&self) -> bool {
        self.terms.iter().all(|t| !t.is_variable())
    }
}

impl Ground for Literal {
    fn is_ground(&self) -> bool {
        self.atom.is_ground()
    }
}
