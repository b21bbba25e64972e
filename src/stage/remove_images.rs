use super::*;

pub struct RemoveImagesStage;

impl Stage for RemoveImagesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if context.options().ignore_images {
      context.document().remove_elements("img");
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn removes_images_when_ignored() {
    let mut document = dom_query::Document::from(
      "<html><body><p>Before <img src=\"photo.jpg\" alt=\"A photo\" /> after</p></body></html>",
    );

    let options = ExtractorOptions::default();

    let mut context = Context::new(&mut document, &options);

    RemoveImagesStage.run(&mut context).unwrap();

    assert_eq!(document.select("img").length(), 0);
    assert_eq!(document.select("p").length(), 1);
  }

  #[test]
  fn keeps_images_when_not_ignored() {
    let mut document = dom_query::Document::from(
      "<html><body><img src=\"photo.jpg\" /></body></html>",
    );

    let options = ExtractorOptions::builder().ignore_images(false).build();

    let mut context = Context::new(&mut document, &options);

    RemoveImagesStage.run(&mut context).unwrap();

    assert_eq!(document.select("img").length(), 1);
  }
}
