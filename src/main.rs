use clap::Parser;
use jnl::application::{
    list_entries, open_journal, record_command, show_page, show_todo, EntryService,
};
use jnl::cli::{format_listing, format_page_view, format_todo_view, Action, Cli};
use jnl::error::JnlError;
use jnl::infrastructure::{Config, Store};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();
    let command_line = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    match run(cli, &command_line) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("JNL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli, command_line: &str) -> Result<(), JnlError> {
    let config = Config::load()?;
    let path = config.resolve_journal(cli.filename.clone())?;

    // Reject bad flag combinations before touching the file system
    let action = cli.action()?;
    for warning in cli.warnings() {
        eprintln!("***Warning: {}", warning);
    }

    let opened = open_journal(&path)?;
    let mut store = opened.store;

    let mutated = if opened.created {
        println!("Created journal file {}", path.display());
        // Only an explicit --ls lists a fresh journal
        if action != Action::List || cli.ls {
            execute(&mut store, &action)?;
        }
        true
    } else {
        execute(&mut store, &action)?;
        action.is_mutation()
    };

    if mutated && config.record_history {
        if let Some(msg) = record_command(&mut store, command_line) {
            eprintln!("{}", msg);
        }
    }

    Ok(())
}

fn execute(store: &mut Store, action: &Action) -> Result<(), JnlError> {
    match action {
        Action::List => {
            let listing = list_entries(store)?;
            print!("{}", format_listing(&listing));
        }
        Action::ShowPage { id } => {
            let view = show_page(store, *id)?;
            print!("{}", format_page_view(&view.item, view.page.as_deref()));
        }
        Action::ShowTodo { id } => {
            let view = show_todo(store, *id)?;
            print!("{}", format_todo_view(&view.item, view.page.as_deref()));
        }
        Action::Add { item_type, text } => {
            println!("{}", EntryService::new(store).add(*item_type, text)?);
        }
        Action::Edit { id, text } => {
            println!("{}", EntryService::new(store).edit(*id, text)?);
        }
        Action::SetCreatedAt { id, date } => {
            println!("{}", EntryService::new(store).redate(*id, date)?);
        }
        Action::AttachPage { id, file } => {
            println!("{}", EntryService::new(store).attach_page(*id, file)?);
        }
        Action::Done { id } => {
            println!("{}", EntryService::new(store).done(*id)?);
        }
        Action::Remove { id } => {
            println!("{}", EntryService::new(store).remove(*id)?);
        }
    }
    Ok(())
}
