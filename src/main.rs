use {
  anyhow::Context,
  article2text::{Extractor, ExtractorOptions},
  std::{fs, process},
};

const SOURCE_PATH: &str = "src.txt";

fn run() -> Result {
  let html = fs::read_to_string(SOURCE_PATH)
    .with_context(|| format!("failed to read file from `{SOURCE_PATH}`"))?;

  let mut extractor = Extractor::new(&html, ExtractorOptions::default());

  let article = extractor
    .extract()
    .context("failed to extract article text")?;

  print!("{}", article.text);

  Ok(())
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
