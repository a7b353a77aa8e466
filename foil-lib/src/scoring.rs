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

//! Information-theoretic scoring of candidate literals (spec §4.F).
//!
//! All counts come in as `f64` rather than integers because the gain
//! formula divides them, and the admissible pruning bound needs
//! `f64::INFINITY` for the "no evidence yet" case — an integer type has no
//! value for that.

/// `H(p, n) = -log2(p / (p + n))`: bits needed to say a binding drawn from
/// `p` positive and `n` negative bindings is positive. Treated as `+∞`
/// when `p` is zero (no positive evidence at all); a mix with no
/// negatives costs `0` bits.
pub fn entropy(p: f64, n: f64) -> f64 {
    if p <= 0.0 {
        return f64::INFINITY;
    }
    -(p / (p + n)).log2()
}

/// Information gain of adding a literal: `t` is the number of bindings
/// that were covered before the literal was added and are still covered
/// after; `(p0, n0)` are the seed clause's positive/negative counts before
/// the literal, `(p1, n1)` the counts after.
pub fn gain(t: f64, p0: f64, n0: f64, p1: f64, n1: f64) -> f64 {
    t * (entropy(p0, n0) - entropy(p1, n1))
}

/// Upper bound on the gain any literal extending this seed could achieve,
/// used to skip computing a candidate's negative coverage when it cannot
/// beat the incumbent (spec §4.F): the best case drives post-candidate
/// entropy to `0`, so `gain ≤ t * H(p0, n0)`.
pub fn pruning_bound(t: f64, p0: f64, n0: f64) -> f64 {
    t * entropy(p0, n0)
}
