use clap::Parser;
use indexmap::IndexSet;
use log::{debug, info};
use rust_launch_cli::cli_args::Args;
use rust_launch_cli::selection::{
    act_then_record, build_menu_items, resolve_choice, ResolvedChoice,
};
use rust_launch_core::config::CachePaths;
use rust_launch_core::entries::Preferences;
use rust_launch_core::error::{Error, Result};
use rust_launch_core::selector::{MenuCommand, Selector};
use rust_launch_core::usage::UsageRanker;
use rust_launch_core::{catalog, clipboard, config, execution, file_handling};
use std::process::ExitCode;

/// Reads the catalog, building it first when it is missing or a rebuild was asked for.
fn load_catalog(
    args: &Args,
    paths: &CachePaths,
    preferences: &Preferences,
) -> Result<IndexSet<String>> {
    if !args.rebuild_cache {
        if let Some(items) = catalog::read_catalog(&paths.catalog)? {
            debug!("Read {} catalog items from `{}`", items.len(), paths.catalog);
            return Ok(items);
        }
    }

    info!("Building catalog at `{}`", paths.catalog);
    catalog::rebuild_catalog(&paths.catalog, preferences)
}

fn launch(args: &Args, resolved: &ResolvedChoice) -> Result<()> {
    if args.dry_run {
        println!("{}", resolved.argv.join(" "));
        println!("Dry run is specified, exiting without launching.");
        return Ok(());
    }

    let command = execution::build_command(&resolved.argv)?;

    if args.wait {
        execution::execute_command(command)
    } else {
        execution::spawn_detached(command)
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);
    let preferences = file_handling::get_preferences(&config_path)?;

    let paths = CachePaths::resolve(&args.cache_dir);
    let catalog = load_catalog(&args, &paths, &preferences)?;

    let ranker = UsageRanker::new(paths);
    ranker.clean_frequently_used_items()?;

    let menu_items = build_menu_items(&ranker.ordered_items()?, &catalog);

    if args.list {
        for item in &menu_items {
            println!("{item}");
        }
        return Ok(());
    }

    let selector = MenuCommand::new(preferences.menu.to_argv());
    let Some(choice) = selector.select(&menu_items)? else {
        info!("Nothing was chosen");
        return Ok(());
    };

    let resolved = resolve_choice(&choice, &preferences);
    info!("Chose {} `{}`: {}", resolved.kind, resolved.item, resolved);

    act_then_record(&ranker, &resolved, !args.no_record, || {
        if !args.copy {
            return launch(&args, &resolved);
        }

        if clipboard::copy_to_clipboard(&resolved.item) {
            Ok(())
        } else {
            Err(Error::Misc(
                "Could not copy to the clipboard with wl-copy, xclip or xsel".to_string(),
            ))
        }
    })
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
