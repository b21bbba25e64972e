use super::*;

pub(crate) const ARTICLE_SELECTOR: &str = ".article-content.rich-text";

pub struct SelectArticleStage;

impl Stage for SelectArticleStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let fragment = context.document().first_inner_html(ARTICLE_SELECTOR);

    context.set_fragment(fragment);

    Ok(())
  }
}
