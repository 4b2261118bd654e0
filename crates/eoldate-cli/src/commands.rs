use super::args::Cli;
use super::handlers::cycles::{self, CycleRequest};
use crate::config::Config;
use crate::logging;
use crate::presentation::view_models::OutputFormat;
use crate::ui;
use anyhow::Result;
use chrono::Utc;
use eoldate_api::{CatalogClient, CycleSource, FileSource};
use is_terminal::IsTerminal;
use std::io::{self, Write};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;

    let format = OutputFormat::from_name(
        cli.format
            .as_deref()
            .or(config.display.format.as_deref())
            .unwrap_or("table"),
    );

    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let palette = config
        .display
        .palette_for(cli.color, io::stdout().is_terminal(), no_color);
    // The picker draws on stderr, which may be a terminal while stdout is not.
    let picker_palette = config
        .display
        .palette_for(cli.color, io::stderr().is_terminal(), no_color);

    let source: Box<dyn CycleSource> = match &cli.input {
        Some(path) => Box::new(FileSource::new(cli.product.clone(), path.clone())),
        None => Box::new(CatalogClient::new(
            config.api.base_url.clone(),
            config.api.timeout(),
        )?),
    };

    let request = CycleRequest {
        query: &cli.product,
        show_all: cli.all,
        format,
        palette,
        now: Utc::now(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cycles::handle(
        source.as_ref(),
        &request,
        |query, candidates| ui::pick_product(query, candidates, picker_palette),
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}
