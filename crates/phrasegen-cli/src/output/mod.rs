//! Rendering of results and errors for the terminal.

pub mod diagnostic;
pub mod table;

pub use diagnostic::PhrasegenDiagnostic;
