#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod parser;
mod serializer;

pub use crate::error::JsonLdParseError;
pub use crate::parser::JsonLdParser;
pub use crate::serializer::JsonLdSerializer;
