/// The primitive words of the language.
pub mod core_words;
