use super::*;

/// The plain-text rendering of an extracted article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleText {
  pub content: Option<String>,
  pub text: String,
  pub length: usize,
}

impl ArticleText {
  pub fn new(content: Option<String>, text: String) -> Self {
    let length = text.chars().count();

    Self {
      content,
      text,
      length,
    }
  }
}
