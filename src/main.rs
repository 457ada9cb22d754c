#![warn(clippy::all, clippy::pedantic)]
#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use env_logger::Env;
use structopt::StructOpt;

use picture_tag::options::Options;

///
/// Renders responsive image markup (`<picture>`, `<img>` or `<link rel="preload">`) from the
/// JSON descriptor of an already optimized image, printing it to stdout so it can be pasted
/// into a template.
fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or("PICTURE_TAG_LOG", "info")).init();

    let options = Options::from_args();
    debug!("Options: {:?}", &options);

    let markup = picture_tag::render_tag(&options).with_context(|| {
        format!(
            "Failed to render a tag for {}",
            options.descriptor.to_string_lossy()
        )
    })?;
    println!("{}", markup.into_string());
    Ok(())
}
