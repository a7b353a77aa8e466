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

//! Rendering a [`crate::problem_file::LoadError`] or a bare
//! [`foil_lib::FoilError`] as a `codespan_reporting` diagnostic, the way
//! `modus/src/main.rs` reports its own parse/analysis errors.

use codespan_reporting::diagnostic::{Diagnostic, Label};

use crate::parser::ParseError;
use crate::problem_file::LoadError;

pub fn parse_error_diagnostic(err: &ParseError) -> Diagnostic<()> {
    Diagnostic::error()
        .with_message("failed to parse problem file")
        .with_labels(vec![
            Label::primary((), err.offset..err.offset).with_message(&err.message)
        ])
}

pub fn load_error_diagnostic(err: &LoadError) -> Diagnostic<()> {
    match err {
        LoadError::Parse(parse_err) => parse_error_diagnostic(parse_err),
        other => Diagnostic::error().with_message(other.to_string()),
    }
}

pub fn foil_error_diagnostic(err: &foil_lib::FoilError) -> Diagnostic<()> {
    Diagnostic::error().with_message(err.to_string())
}
