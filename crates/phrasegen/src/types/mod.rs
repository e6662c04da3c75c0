mod candidate;
mod dictionary;
mod phrase;
mod translation;

pub use candidate::Candidate;
pub use dictionary::{Dictionary, DuplicateToken};
pub use phrase::TargetPhrase;
pub use translation::{ResultSet, TranslationResult};
