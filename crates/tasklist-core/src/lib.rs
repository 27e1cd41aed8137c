pub mod input;
pub mod repository;
pub mod store;
pub mod task;
pub mod theme;
pub mod view;

#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod datastore;
#[cfg(feature = "native")]
pub mod render;

#[cfg(feature = "native")]
pub use native::run;

#[cfg(feature = "native")]
mod native {
  use std::ffi::OsString;

  use anyhow::{
    Context,
    bail
  };
  use clap::Parser;
  use tracing::{
    debug,
    info
  };

  use crate::cli::{
    self,
    Command,
    ThemeCommand
  };
  use crate::config;
  use crate::datastore::FileStore;
  use crate::input::{
    Outcome,
    Session
  };
  use crate::render::Renderer;

  #[tracing::instrument(skip_all)]
  pub fn run(
    raw_args: Vec<OsString>
  ) -> anyhow::Result<()> {
    let pre =
      cli::preprocess_args(&raw_args)?;
    let cli = cli::GlobalCli::parse_from(
      pre.cleaned_args
    );

    cli::init_tracing(
      cli.verbose,
      cli.quiet
    )?;

    info!(
      verbose = cli.verbose,
      quiet = cli.quiet,
      "starting tasklist CLI"
    );
    debug!(?pre.rc_overrides, "preprocessed rc overrides");

    let mut cfg = config::Config::load(
      cli.tasklistrc.as_deref()
    )?;
    cfg.apply_overrides(
      pre.rc_overrides.into_iter().chain(
        cli
          .rc_overrides
          .into_iter()
          .map(|kv| (kv.key, kv.value))
      )
    );

    let data_dir =
      config::resolve_data_dir(
        &cfg,
        cli.data.as_deref()
      )
      .context(
        "failed to resolve data \
         directory"
      )?;

    let store = FileStore::open(
      &data_dir
    )
    .with_context(|| {
      format!(
        "failed to open datastore at \
         {}",
        data_dir.display()
      )
    })?;

    let renderer = Renderer::new(&cfg)?;
    let mut session = Session::start(
      store,
      config::prefers_dark(&cfg),
      renderer
    );

    let command =
      cli.command.unwrap_or(Command::List);

    if let Some(action) = command.action()
    {
      let mut alerts: Vec<String> = Vec::new();
      match session
        .dispatch(action, &mut alerts)
      {
        | Outcome::Rejected(_) => {
          bail!("{}", alerts.join("; "))
        }
        | Outcome::ThemeChanged(theme) => {
          println!(
            "Theme set to {theme}."
          );
          return Ok(());
        }
        | Outcome::TaskAdded { id } => {
          println!("Created task {id}.");
        }
        | Outcome::Toggled {
          completed: None,
          id
        }
        | Outcome::Deleted {
          removed: 0,
          id
        } => {
          println!("No task {id}.");
        }
        | Outcome::Toggled { .. }
        | Outcome::Deleted { .. } => {}
      }
    }

    let view = session.view();
    match command {
      | Command::Html => {
        session
          .surface()
          .print_html(&view)?
      }
      | Command::Theme {
        action: None | Some(ThemeCommand::Show)
      } => {
        println!("{}", session.theme())
      }
      | _ => {
        session
          .surface()
          .print_list(&view)?
      }
    }

    info!("done");
    Ok(())
  }
}
