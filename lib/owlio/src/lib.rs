#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod format;
mod parser;
mod serializer;

pub use crate::error::OntologyParseError;
pub use crate::format::OntologyFormat;
pub use crate::parser::OntologyParser;
pub use crate::serializer::OntologySerializer;
