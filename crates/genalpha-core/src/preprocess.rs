pub trait Preprocessor {
    /// Text as it is sent for translation
    fn process(&self, text: &str) -> String {
        text.trim().to_string()
    }

    /// Key used for exact vocabulary matching
    fn match_key(&self, text: &str) -> String {
        self.process(text).to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
