#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod parser;
mod serializer;

pub use crate::error::RdfXmlParseError;
pub use crate::parser::RdfXmlParser;
pub use crate::serializer::RdfXmlSerializer;
