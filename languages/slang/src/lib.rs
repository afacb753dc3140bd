pub mod dictionary;
pub mod flashcards;
pub mod loader;
pub mod quiz;
pub mod translator;

pub use dictionary::Vocabulary;
pub use flashcards::FlashcardDeck;
pub use loader::VocabularyLoader;
pub use quiz::{Quiz, QuizQuestion};
pub use translator::MockTranslator;
