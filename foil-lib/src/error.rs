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

//! Error kinds the core reports to its caller (spec §7).
//!
//! `NoProgress` is deliberately absent here: an exhausted search is normal
//! termination, represented by an ordinary (possibly empty) `Hypothesis`,
//! never by an `Err`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FoilError {
    /// Arity mismatch between a mask and its declared functor, between a
    /// clause and the background's declared arities, non-disjoint
    /// positive/negative example sets, or an example whose assignment does
    /// not cover the target's variables.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The predicate dependency graph of background clauses (and any
    /// candidate hypothesis clause) has a cycle through a negated edge: the
    /// grounder's fixpoint would be evaluation-order dependent.
    #[error("program is not stratified: negation through recursion on {predicate}")]
    Unstratified { predicate: String },
}

impl FoilError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        FoilError::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FoilError>;
