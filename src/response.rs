use serde::{Deserialize, Serialize};

/// Outcome of an operation at the crate boundary: the computed value together
/// with the error flag and all diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub result: T,
    pub errors: bool,
    pub comments: String,
}

impl<T> Response<T> {
    pub fn new(result: T, diagnostics: Diagnostics) -> Self {
        Response {
            result,
            errors: diagnostics.has_errors(),
            comments: diagnostics.into_text(),
        }
    }

    pub fn ok(result: T) -> Self {
        Response::new(result, Diagnostics::default())
    }

    pub fn failed(result: T, comment: impl Into<String>) -> Self {
        let mut diagnostics = Diagnostics::default();
        diagnostics.fail(comment);
        Response::new(result, diagnostics)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            result: f(self.result),
            errors: self.errors,
            comments: self.comments,
        }
    }
}

/// Accumulates diagnostic text for a single request.
///
/// Texts are concatenated in the order they were reported. Any non-empty text
/// marks the request as erroneous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    text: String,
    errors: bool,
}

impl Diagnostics {
    /// Appends provider text. Empty text is not an error.
    pub fn record(&mut self, text: &str) {
        if !text.is_empty() {
            self.text.push_str(text);
            self.errors = true;
        }
    }

    /// Appends text without marking the request as failed.
    pub fn note(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Marks the request as failed with `comment`.
    pub fn fail(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        if !self.text.is_empty() && !comment.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(&comment);
        self.errors = true;
    }

    pub fn has_errors(&self) -> bool {
        self.errors
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
