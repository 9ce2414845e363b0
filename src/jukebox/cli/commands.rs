use super::logging;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use jukebox::api::JukeboxApi;
use jukebox::catalog::Catalog;
use jukebox::config::JukeboxConfig;
use jukebox::error::Result;
use jukebox::render::TextPresenter;
use jukebox::session::{Presenter, Session};
use std::io::{self, Write};
use tracing::{debug, warn};

struct AppContext {
    api: JukeboxApi,
    presenter: TextPresenter,
    show_banner: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Play { selection }) => handle_play(&ctx, &selection),
        None => handle_session(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = load_config(cli)?;

    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    debug!(songs = catalog.len(), "catalog ready");

    let use_color = !cli.no_color && config.color.unwrap_or_else(console::colors_enabled);

    Ok(AppContext {
        api: JukeboxApi::new(catalog),
        presenter: TextPresenter::new(use_color),
        show_banner: config.show_banner && !cli.no_banner,
    })
}

/// An explicit `--config` must load; the default location falls back to defaults.
fn load_config(cli: &Cli) -> Result<JukeboxConfig> {
    if let Some(path) = &cli.config {
        return JukeboxConfig::load_file(path);
    }

    let Some(dirs) = ProjectDirs::from("com", "jukebox", "jukebox") else {
        return Ok(JukeboxConfig::default());
    };

    Ok(JukeboxConfig::load(dirs.config_dir()).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        JukeboxConfig::default()
    }))
}

fn handle_session(ctx: &AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let mut session = Session::new(&ctx.api, ctx.presenter).with_banner(ctx.show_banner);
    let state = session.run(&mut input, &mut output)?;
    debug!(?state, "session finished");
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", ctx.presenter.menu(&ctx.api.menu()))?;
    out.flush()?;
    Ok(())
}

fn handle_play(ctx: &AppContext, selection: &str) -> Result<()> {
    let mut session = Session::new(&ctx.api, ctx.presenter);
    let result = session.step(Some(selection))?;

    let mut out = io::stdout().lock();
    write!(out, "{}", ctx.presenter.outcome(&result))?;
    out.flush()?;
    Ok(())
}
