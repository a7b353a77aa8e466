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

//! Memoizing `learn` results by problem (spec §4.I).
//!
//! The cache is an explicit, caller-owned handle rather than a global: a
//! long-running host can share one `Cache` across many `learn` calls, a
//! one-shot CLI invocation can skip it entirely by passing `None`, and
//! tests never have to worry about state leaking between cases.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::problem::{Hypothesis, Problem};

#[derive(Default)]
pub struct Cache {
    entries: Mutex<HashMap<Problem, Hypothesis>>,
}

impl Cache {
    pub fn new() -> Self {
        Cache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, problem: &Problem) -> Option<Hypothesis> {
        self.entries.lock().unwrap().get(problem).cloned()
    }

    pub fn insert(&self, problem: Problem, hypothesis: Hypothesis) {
        self.entries.lock().unwrap().insert(problem, hypothesis);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::{Atom, Literal};
    use crate::term::Variable;
    use std::collections::BTreeSet;

    fn sample_problem() -> Problem {
        Problem::new(
            Vec::new(),
            Literal::positive(Atom::new(
                "p",
                vec![crate::term::Term::Variable(Variable::from("X"))],
            )),
            Vec::new(),
            BTreeSet::new(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn hits_are_served_from_cache() {
        let cache = Cache::new();
        assert!(cache.get(&sample_problem()).is_none());
        cache.insert(sample_problem(), vec![]);
        assert_eq!(cache.get(&sample_problem()), Some(vec![]));
        assert_eq!(cache.len(), 1);
    }
}
