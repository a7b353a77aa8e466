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

//! The Prolog-like surface syntax a problem file is written in.
//!
//! `functor(arg, arg, ...)` atoms, `.`-terminated facts and rules, a leading
//! `not` marking a negated body literal, `::` mask declarations, a `?-`
//! target declaration, and `+`/`-`-prefixed ground example facts. `%` starts
//! a line comment. None of this is THE CORE (spec §1); `foil_lib` never
//! sees source text, only the `Clause`/`Literal`/`Mask`/`Problem` values this
//! module and [`crate::problem_file`] build from it.
//!
//! Grounded on `foil_lib`'s teacher's own `logic::parser` submodule (`nom`
//! combinator style over a `nom_locate` span), adapted to FOIL's flatter
//! single-term-type grammar and its unquoted lowercase/digit constants.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{
    alpha1, alphanumeric1, char, digit1, multispace1, not_line_ending,
};
use nom::combinator::{eof, map, map_res, opt, recognize, verify};
use nom::error::ErrorKind;
use nom::multi::{fold_many0, many0, separated_list1};
use nom::sequence::{delimited, pair, preceded};
use nom::Err as NomErr;
use nom_locate::LocatedSpan;
use thiserror::Error;

use foil_lib::{Atom, Clause, Literal, Mask, Term, Value, Variable};

pub type Span<'a> = LocatedSpan<&'a str>;

/// One parsed problem-file item, in source order.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Clause(Clause),
    Mask(Mask),
    Target(Literal),
    Example { atom: Atom, positive: bool },
}

/// A parse failure, anchored to a byte offset so [`crate::report`] can turn
/// it into a `codespan_reporting` diagnostic.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ParseError {
    pub offset: usize,
    pub line: u32,
    pub column: usize,
    pub message: String,
}

/// Parses a complete problem file into its items, in the order they appear.
pub fn parse_file(source: &str) -> Result<Vec<Item>, ParseError> {
    match all_items(Span::new(source)) {
        Ok((_, items)) => Ok(items),
        Err(NomErr::Error(e)) | Err(NomErr::Failure(e)) => Err(ParseError {
            offset: e.span.location_offset(),
            line: e.span.location_line(),
            column: e.span.get_column(),
            message: e.message,
        }),
        Err(NomErr::Incomplete(_)) => Err(ParseError {
            offset: source.len(),
            line: 0,
            column: 0,
            message: "unexpected end of input".to_string(),
        }),
    }
}

/// A minimal `nom::error::ParseError` that remembers only the innermost
/// failure (the first one `append` sees), since that is the most useful
/// position to report to a user — not `nom::error::VerboseError`'s full
/// context stack, which this grammar is too flat to need.
#[derive(Clone, Debug)]
struct RawError<'a> {
    span: Span<'a>,
    message: String,
}

impl<'a> nom::error::ParseError<Span<'a>> for RawError<'a> {
    fn from_error_kind(input: Span<'a>, kind: ErrorKind) -> Self {
        RawError {
            span: input,
            message: format!("unexpected input ({:?})", kind),
        }
    }

    fn append(_: Span<'a>, _: ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: Span<'a>, c: char) -> Self {
        RawError {
            span: input,
            message: format!("expected '{}'", c),
        }
    }
}

impl<'a, E: std::fmt::Display> nom::error::FromExternalError<Span<'a>, E> for RawError<'a> {
    fn from_external_error(input: Span<'a>, _kind: ErrorKind, e: E) -> Self {
        RawError {
            span: input,
            message: e.to_string(),
        }
    }
}

type IResult<'a, O> = nom::IResult<Span<'a>, O, RawError<'a>>;

fn comment(i: Span) -> IResult<Span> {
    recognize(pair(char('%'), not_line_ending))(i)
}

fn skip_ws(i: Span) -> IResult<()> {
    fold_many0(
        alt((map(multispace1, |_| ()), map(comment, |_| ()))),
        || (),
        |_, _| (),
    )(i)
}

/// Skips leading whitespace/comments, then runs `inner`.
fn tok<'a, O, F>(mut inner: F) -> impl FnMut(Span<'a>) -> IResult<'a, O>
where
    F: FnMut(Span<'a>) -> IResult<'a, O>,
{
    move |i: Span<'a>| {
        let (i, _) = skip_ws(i)?;
        inner(i)
    }
}

fn identifier(i: Span) -> IResult<Span> {
    recognize(pair(alpha1, many0(alt((alphanumeric1, tag("_"))))))(i)
}

fn uinteger(i: Span) -> IResult<usize> {
    map_res(digit1, |s: Span| s.fragment().parse::<usize>())(i)
}

fn integer(i: Span) -> IResult<i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: Span| {
        s.fragment().parse::<i64>()
    })(i)
}

/// Uppercase-initial identifiers are variables; everything else (a
/// lowercase-initial identifier, or a bare integer) is a constant.
fn term(i: Span) -> IResult<Term> {
    alt((
        map(integer, |n| Term::Value(Value::Int(n))),
        map(identifier, |s: Span| {
            let text = s.fragment().to_string();
            let starts_upper = text.chars().next().is_some_and(|c| c.is_ascii_uppercase());
            if starts_upper {
                Term::Variable(Variable(text))
            } else {
                Term::Value(Value::Symbol(text))
            }
        }),
    ))(i)
}

fn atom(i: Span) -> IResult<Atom> {
    map(
        pair(
            identifier,
            opt(delimited(
                tok(char('(')),
                separated_list1(tok(char(',')), tok(term)),
                tok(char(')')),
            )),
        ),
        |(name, args)| Atom::new(name.fragment().to_string(), args.unwrap_or_default()),
    )(i)
}

/// Matches the keyword `not` as a whole identifier, not merely a prefix (so
/// a predicate named e.g. `nothing` is never mistaken for a negation).
fn negation_marker(i: Span) -> IResult<()> {
    map(
        verify(tok(identifier), |s: &Span| *s.fragment() == "not"),
        |_| (),
    )(i)
}

fn body_literal(i: Span) -> IResult<Literal> {
    map(pair(opt(negation_marker), tok(atom)), |(neg, atom)| {
        if neg.is_some() {
            Literal::negative(atom)
        } else {
            Literal::positive(atom)
        }
    })(i)
}

fn fact_or_rule(i: Span) -> IResult<Item> {
    let (i, head) = tok(atom)(i)?;
    let (i, body) = opt(preceded(
        tok(tag(":-")),
        separated_list1(tok(char(',')), body_literal),
    ))(i)?;
    let (i, _) = tok(char('.'))(i)?;
    Ok((i, Item::Clause(Clause::new(head, body.unwrap_or_default()))))
}

fn mask_item(i: Span) -> IResult<Item> {
    let (i, _) = tok(tag("::"))(i)?;
    let (i, neg) = opt(negation_marker)(i)?;
    let (i, functor) = tok(identifier)(i)?;
    let (i, _) = tok(char('/'))(i)?;
    let (i, arity) = tok(uinteger)(i)?;
    let (i, _) = tok(char('.'))(i)?;
    Ok((
        i,
        Item::Mask(Mask::new(functor.fragment().to_string(), arity, neg.is_some())),
    ))
}

fn target_item(i: Span) -> IResult<Item> {
    let (i, _) = tok(tag("?-"))(i)?;
    let (i, target_atom) = tok(atom)(i)?;
    let (i, _) = tok(char('.'))(i)?;
    Ok((i, Item::Target(Literal::positive(target_atom))))
}

fn example_item(i: Span) -> IResult<Item> {
    let (i, sign) = tok(alt((char('+'), char('-'))))(i)?;
    let (i, example_atom) = tok(atom)(i)?;
    let (i, _) = tok(char('.'))(i)?;
    Ok((
        i,
        Item::Example {
            atom: example_atom,
            positive: sign == '+',
        },
    ))
}

fn item(i: Span) -> IResult<Item> {
    alt((mask_item, target_item, example_item, fact_or_rule))(i)
}

fn all_items(i: Span) -> IResult<Vec<Item>> {
    let (i, items) = many0(item)(i)?;
    let (i, _) = skip_ws(i)?;
    let (i, _) = eof(i)?;
    Ok((i, items))
}
