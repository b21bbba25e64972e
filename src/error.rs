#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to render article text: {source}")]
  Render {
    #[from]
    source: html2text::Error,
  },
}
