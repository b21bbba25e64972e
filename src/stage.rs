use super::*;

mod remove_images;
mod render_text;
mod select_article;

pub use {
  remove_images::RemoveImagesStage, render_text::RenderTextStage,
  select_article::SelectArticleStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
