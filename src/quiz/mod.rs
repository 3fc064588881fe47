pub mod definition;
pub mod error;
pub mod index;
pub mod source;

pub use self::definition::{Question, QuizDefinition};
pub use self::error::LoadError;
pub use self::index::QuizEntry;
pub use self::source::{DirectorySource, QuizSource};
