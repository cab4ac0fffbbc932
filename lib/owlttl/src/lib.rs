#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod parser;
mod serializer;

pub use crate::parser::TurtleParser;
pub use crate::serializer::TurtleSerializer;
