use super::*;

pub(crate) struct Context<'a> {
  fragment: Option<String>,
  html: &'a mut dom_query::Document,
  options: &'a ExtractorOptions,
  text: String,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&mut self) -> Document<'_> {
    Document::new(&mut *self.html)
  }

  pub(crate) fn fragment(&self) -> Option<&str> {
    self.fragment.as_deref()
  }

  pub(crate) fn new(
    html: &'a mut dom_query::Document,
    options: &'a ExtractorOptions,
  ) -> Self {
    Self {
      fragment: None,
      html,
      options,
      text: String::new(),
    }
  }

  pub(crate) fn options(&self) -> &ExtractorOptions {
    self.options
  }

  pub(crate) fn set_fragment(&mut self, fragment: Option<String>) {
    self.fragment = fragment;
  }

  pub(crate) fn set_text(&mut self, text: String) {
    self.text = text;
  }

  pub(crate) fn take_fragment(&mut self) -> Option<String> {
    self.fragment.take()
  }

  pub(crate) fn take_text(&mut self) -> String {
    mem::take(&mut self.text)
  }
}
