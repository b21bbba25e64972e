pub(crate) const DEFAULT_WRAP_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct ExtractorOptions {
  pub ignore_images: bool,
  pub ignore_links: bool,
  pub wrap_width: usize,
}

impl Default for ExtractorOptions {
  fn default() -> Self {
    Self {
      ignore_images: true,
      ignore_links: true,
      wrap_width: DEFAULT_WRAP_WIDTH,
    }
  }
}

impl ExtractorOptions {
  #[must_use]
  pub fn builder() -> ExtractorOptionsBuilder {
    ExtractorOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct ExtractorOptionsBuilder {
  inner: ExtractorOptions,
}

impl ExtractorOptionsBuilder {
  #[must_use]
  pub fn build(self) -> ExtractorOptions {
    self.inner
  }

  #[must_use]
  pub fn ignore_images(self, ignore_images: bool) -> Self {
    Self {
      inner: ExtractorOptions {
        ignore_images,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn ignore_links(self, ignore_links: bool) -> Self {
    Self {
      inner: ExtractorOptions {
        ignore_links,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn wrap_width(self, wrap_width: usize) -> Self {
    Self {
      inner: ExtractorOptions {
        wrap_width,
        ..self.inner
      },
    }
  }
}
