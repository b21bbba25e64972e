use {
  context::Context,
  document::Document,
  html2text::render::TrivialDecorator,
  pipeline::Pipeline,
  serde::{Deserialize, Serialize},
  stage::{RemoveImagesStage, RenderTextStage, SelectArticleStage, Stage},
  std::mem,
};

pub use crate::{
  article::ArticleText,
  error::Error,
  extractor::Extractor,
  options::{ExtractorOptions, ExtractorOptionsBuilder},
};

mod article;
mod context;
mod document;
mod error;
mod extractor;
mod options;
mod pipeline;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
