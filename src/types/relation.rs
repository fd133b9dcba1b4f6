use super::version::{Version, VersionCmpCache};
use crate::error::ParseError;
use crate::pool::{Available, PackageIndex};

use nom::{
    bytes::complete::{take_till1, take_while_m_n},
    character::complete::{char, multispace0, space0},
    combinator::{eof, opt},
    sequence::{delimited, pair, separated_pair, terminated},
    IResult,
};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Version comparison operator of a versioned relation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `<<`
    StrictlyEarlier,
    /// `<=`
    EarlierOrEqual,
    /// `=`
    Exactly,
    /// `>=`
    LaterOrEqual,
    /// `>>`
    StrictlyLater,
    /// Obsolete `<`, same as `<=`
    LegacyEarlier,
    /// Obsolete `>`, same as `>=`
    LegacyLater,
}

impl Operator {
    /// Whether `available.cmp(required) == ord` fulfills this operator
    pub fn accepts(self, ord: Ordering) -> bool {
        match self {
            Operator::StrictlyEarlier => ord == Ordering::Less,
            Operator::EarlierOrEqual | Operator::LegacyEarlier => ord != Ordering::Greater,
            Operator::Exactly => ord == Ordering::Equal,
            Operator::LaterOrEqual | Operator::LegacyLater => ord != Ordering::Less,
            Operator::StrictlyLater => ord == Ordering::Greater,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::StrictlyEarlier => "<<",
            Operator::EarlierOrEqual => "<=",
            Operator::Exactly => "=",
            Operator::LaterOrEqual => ">=",
            Operator::StrictlyLater => ">>",
            Operator::LegacyEarlier => "<",
            Operator::LegacyLater => ">",
        }
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<<" => Ok(Operator::StrictlyEarlier),
            "<=" => Ok(Operator::EarlierOrEqual),
            "=" => Ok(Operator::Exactly),
            ">=" => Ok(Operator::LaterOrEqual),
            ">>" => Ok(Operator::StrictlyLater),
            "<" => Ok(Operator::LegacyEarlier),
            ">" => Ok(Operator::LegacyLater),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry of a Depends-like field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `name`
    NameOnly(String),
    /// `name (op version)`
    VersionConstrained {
        name: String,
        op: Operator,
        version: Version,
    },
    /// `a | b (>= 1) | c`, never nested
    Alternatives(Vec<Relation>),
}

/// Outcome of testing a relation against a [`PackageIndex`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Satisfaction<'a> {
    /// Names that fulfilled the relation, in order, without duplicates
    Satisfied(Vec<&'a str>),
    Unsatisfied,
}

impl<'a> Satisfaction<'a> {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Satisfaction::Satisfied(_))
    }
}

impl Relation {
    /// Parse one comma-separated clause, splitting alternatives on `|`
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut alts = s
            .split('|')
            .map(parse_alternative)
            .collect::<Result<Vec<_>, _>>()?;
        if alts.len() == 1 {
            Ok(alts.remove(0))
        } else {
            Ok(Relation::Alternatives(alts))
        }
    }

    /// Every package name mentioned by this relation
    pub fn names(&self) -> Vec<&str> {
        match self {
            Relation::NameOnly(name) | Relation::VersionConstrained { name, .. } => {
                vec![name.as_str()]
            }
            Relation::Alternatives(alts) => alts.iter().flat_map(|r| r.names()).collect(),
        }
    }

    pub fn satisfied_by<'a>(
        &'a self,
        index: &PackageIndex,
        cache: &mut VersionCmpCache,
    ) -> Satisfaction<'a> {
        match self {
            Relation::NameOnly(name) => {
                if index.contains(name) {
                    Satisfaction::Satisfied(vec![name.as_str()])
                } else {
                    Satisfaction::Unsatisfied
                }
            }
            Relation::VersionConstrained { name, op, version } => {
                let satisfied = match index.get(name) {
                    Some(Available::Any) => true,
                    Some(Available::Real(available)) => {
                        op.accepts(cache.compare(available, version))
                    }
                    Some(Available::Virtual) | None => false,
                };
                if satisfied {
                    Satisfaction::Satisfied(vec![name.as_str()])
                } else {
                    Satisfaction::Unsatisfied
                }
            }
            Relation::Alternatives(alts) => {
                let mut res: Vec<&str> = Vec::new();
                for alt in alts {
                    if let Satisfaction::Satisfied(names) = alt.satisfied_by(index, cache) {
                        for name in names {
                            if !res.contains(&name) {
                                res.push(name);
                            }
                        }
                    }
                }
                if res.is_empty() {
                    Satisfaction::Unsatisfied
                } else {
                    Satisfaction::Satisfied(res)
                }
            }
        }
    }
}

impl FromStr for Relation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::parse(s)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Relation::NameOnly(name) => write!(f, "{}", name),
            Relation::VersionConstrained { name, op, version } => {
                write!(f, "{} ({} {})", name, op, version)
            }
            Relation::Alternatives(alts) => {
                let alts: Vec<String> = alts.iter().map(|r| r.to_string()).collect();
                write!(f, "{}", alts.join(" | "))
            }
        }
    }
}

// parser combinators
fn is_op_char(c: char) -> bool {
    c == '<' || c == '=' || c == '>'
}

fn parse_package_name(s: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == '(' || c == ')' || c.is_whitespace())(s)
}

fn parse_version_op(s: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 2, is_op_char)(s)
}

fn parse_version_expr(s: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        parse_version_op,
        space0,
        take_till1(|c: char| c == ')' || c.is_whitespace()),
    )(s)
}

fn parse_relation_suffix(s: &str) -> IResult<&str, (&str, &str)> {
    delimited(
        pair(char('('), space0),
        parse_version_expr,
        pair(space0, char(')')),
    )(s)
}

fn parse_relational(s: &str) -> IResult<&str, (&str, Option<(&str, &str)>)> {
    let (s, _) = multispace0(s)?;
    let (s, name) = terminated(parse_package_name, multispace0)(s)?;
    let (s, suffix) = terminated(opt(parse_relation_suffix), multispace0)(s)?;
    let (s, _) = eof(s)?;
    Ok((s, (name, suffix)))
}

fn parse_alternative(s: &str) -> Result<Relation, ParseError> {
    let (_, (name, suffix)) = parse_relational(s).map_err(|e| match e {
        nom::Err::Error(e) | nom::Err::Failure(e) if e.input.trim().is_empty() => {
            ParseError::relation(s, "missing package name")
        }
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            ParseError::relation(s, format!("unexpected \"{}\"", e.input.trim()))
        }
        nom::Err::Incomplete(_) => ParseError::relation(s, "incomplete relation"),
    })?;

    let name = name.to_string();
    Ok(match suffix {
        None => Relation::NameOnly(name),
        Some((op, version)) => Relation::VersionConstrained {
            name,
            op: op
                .parse()
                .map_err(|_| ParseError::relation(s, format!("unknown operator {}", op)))?,
            version: Version::parse(version)?,
        },
    })
}
