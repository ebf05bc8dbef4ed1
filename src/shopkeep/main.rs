use clap::Parser;
use directories::ProjectDirs;
use shopkeep::api::{ConfigAction, ProductFields, ShopkeepApi};
use shopkeep::config::ShopkeepConfig;
use shopkeep::error::{Result, ShopkeepError};
use shopkeep::model::SortOption;
use shopkeep::store::fs_backend::FsBackend;
use shopkeep::store::slot_store::SlotStore;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands, FieldArgs};
use cli::print::{
    print_config, print_full_products, print_messages, print_validation_errors, print_view,
};

type Api = ShopkeepApi<SlotStore<FsBackend>>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let ShopkeepError::Validation(errors) = &e {
            print_validation_errors(errors);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::List { search, sort, page }) => handle_list(&api, search, sort, page),
        Some(Commands::Add { fields }) => handle_add(&mut api, fields),
        Some(Commands::Show { ids }) => handle_show(&api, ids),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut api, id, fields),
        Some(Commands::Delete { ids }) => handle_delete(&mut api, ids),
        Some(Commands::Reset) => handle_reset(&mut api),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        Some(Commands::Shell) => handle_shell(api),
        None => handle_list(&api, None, None, 1),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SHOPKEEP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os("SHOPKEEP_HOME") {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shopkeep", "shopkeep")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShopkeepError::Store("Could not determine data directory".to_string()))
}

fn init_api(cli: &Cli) -> Result<Api> {
    let dir = data_dir(cli)?;
    let config = ShopkeepConfig::load(&dir).unwrap_or_else(|e| {
        warn!(error = %e, "Could not read config, using defaults");
        ShopkeepConfig::default()
    });
    let store = SlotStore::with_backend(FsBackend::new(dir.clone()));
    Ok(ShopkeepApi::new(store, dir, config))
}

fn to_fields(args: FieldArgs) -> ProductFields {
    ProductFields {
        name: args.name,
        description: args.description,
        price: args.price,
        image: args.image,
    }
}

fn handle_list(
    api: &Api,
    search: Option<String>,
    sort: Option<SortOption>,
    page: usize,
) -> Result<()> {
    let result = api.list_products(search, sort, page)?;
    if let Some(view) = &result.listing {
        print_view(view);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut Api, fields: FieldArgs) -> Result<()> {
    let result = api.add_product(&to_fields(fields))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &Api, ids: Vec<String>) -> Result<()> {
    let result = api.show_products(&ids)?;
    print_full_products(&result.affected_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut Api, id: String, fields: FieldArgs) -> Result<()> {
    let result = api.edit_product(&id, &to_fields(fields))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut Api, ids: Vec<String>) -> Result<()> {
    let result = api.delete_products(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(api: &mut Api) -> Result<()> {
    let result = api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &Api, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(api: Api) -> Result<()> {
    let mut session = api.into_session();
    let stdin = std::io::stdin();
    cli::shell::run(&mut session, stdin.lock())
}
