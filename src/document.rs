use super::*;

pub(crate) struct Document<'a> {
  document: &'a mut dom_query::Document,
}

impl<'a> Document<'a> {
  pub(crate) fn first_inner_html(&self, selector: &str) -> Option<String> {
    self
      .document
      .select(selector)
      .nodes()
      .first()
      .map(|node| node.inner_html().to_string())
  }

  pub(crate) fn new(document: &'a mut dom_query::Document) -> Self {
    Document { document }
  }

  pub(crate) fn remove_elements(&mut self, selector: &str) {
    self.document.select(selector).remove();
  }
}
