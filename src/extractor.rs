use super::*;

/// Extracts the article body from an HTML document and renders it as plain
/// text.
pub struct Extractor {
  html: dom_query::Document,
  options: ExtractorOptions,
}

impl Extractor {
  pub fn extract(&mut self) -> Result<ArticleText> {
    let context = Context::new(&mut self.html, &self.options);

    let mut context = Pipeline::new(context).run()?;

    Ok(ArticleText::new(
      context.take_fragment(),
      context.take_text(),
    ))
  }

  pub fn new(html: &str, options: ExtractorOptions) -> Self {
    Self {
      html: dom_query::Document::from(html),
      options,
    }
  }
}
