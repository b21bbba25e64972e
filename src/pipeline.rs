use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage>>,
}

impl<'a> Pipeline<'a> {
  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: vec![
        Box::new(RemoveImagesStage),
        Box::new(SelectArticleStage),
        Box::new(RenderTextStage),
      ],
    }
  }

  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for stage in &mut self.stages {
      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }
}
