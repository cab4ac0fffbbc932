#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod eval;
mod parser;
mod query;
pub mod solution;
mod term;
mod triples;

pub use crate::error::QuerySyntaxError;
pub use crate::eval::evaluate_query;
pub use crate::query::{
    OptionalBlock, PatternElement, PatternTerm, SelectClause, SelectQuery, TriplePattern,
    WhereClause,
};
pub use crate::solution::{QueryResults, QuerySolution, VariableSolutionIndex};
pub use crate::term::{Term, Variable};
pub use crate::triples::{Triple, ontology_triples};
