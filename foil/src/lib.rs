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

//! The CLI collaborator's own library surface: the surface-syntax parser,
//! the problem-file loader, and diagnostic rendering (spec §6). None of
//! this is THE CORE — it exists as a library target purely so the `foil`
//! binary and its `tests/` integration suite can share the same code,
//! matching the `modus`/`modus-lib` split one level down.

pub mod parser;
pub mod problem_file;
pub mod report;
