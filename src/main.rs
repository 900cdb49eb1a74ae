use env_logger::Env;
use hromada_docs::{DocsError, Generator, GeneratorConfig};

/// Writes both Hromada documents below the current directory.
fn main() -> Result<(), DocsError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::default();
    println!("Generating Hromada PDFs...");

    let generator = Generator::new(config)?;
    generator.generate_each(|_, path| println!("  \u{2713} {}", path.display()))?;

    println!("\nDone. Files in: {}/", generator.config().output_path().display());
    Ok(())
}
