//! Line-oriented file collaborators around the engine.
//!
//! Reading dictionary and phrase files, and persisting ranked results as
//! two index-aligned files: one of translations and one of weights.

mod error;
mod sink;
mod source;

pub use error::{LoadError, SinkError};
pub use sink::{PairedFileSink, ResultSink, WriterSink, format_weight};
pub use source::{load_dictionary, read_lines};
