#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod reasoner;

pub use crate::error::ReasoningLimitError;
pub use crate::reasoner::{
    DEFAULT_MAX_VISITED, ReasonerConfig, ReasoningError, ReasoningErrorKind, ReasoningResult,
    ReasoningWarning, ReasoningWarningKind, StructuralReasoner, reason,
};
