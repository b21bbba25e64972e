use super::*;

pub struct RenderTextStage;

impl Stage for RenderTextStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let options = context.options();

    let text = match context.fragment() {
      Some(fragment) if options.ignore_links => {
        html2text::config::with_decorator(TrivialDecorator::new())
          .string_from_read(fragment.as_bytes(), options.wrap_width)?
      }
      Some(fragment) => html2text::config::plain()
        .string_from_read(fragment.as_bytes(), options.wrap_width)?,
      None => String::new(),
    };

    context.set_text(text);

    Ok(())
  }
}
