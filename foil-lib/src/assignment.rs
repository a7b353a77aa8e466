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

//! An assignment: a total mapping from a stated variable set to values.

use std::collections::BTreeMap;
use std::fmt;

use crate::term::{Value, Variable};

/// A `BTreeMap` rather than a hash map so that `Assignment` (and anything
/// built from it, like `Example` and `Problem`) has a canonical iteration
/// order and can be used as a memoization key without extra bookkeeping.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Assignment(BTreeMap<Variable, Value>);

impl Assignment {
    pub fn new() -> Self {
        Assignment(BTreeMap::new())
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Variable, Value)>) -> Self {
        Assignment(pairs.into_iter().collect())
    }

    pub fn get(&self, var: &Variable) -> Option<&Value> {
        self.0.get(var)
    }

    pub fn insert(&mut self, var: Variable, value: Value) -> Option<Value> {
        self.0.insert(var, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Value)> {
        self.0.iter()
    }

    /// Whether every one of `vars` has a binding in this assignment.
    pub fn is_total_on(&self, vars: &[Variable]) -> bool {
        vars.iter().all(|v| self.0.contains_key(v))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.0
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
