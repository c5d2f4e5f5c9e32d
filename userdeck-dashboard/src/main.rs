use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use dialoguer::{Confirm, console::Term};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userdeck_dashboard::{
    ApiClient, Config, Message, UserAdminApiAdapter, UserManagementDomain,
    UserManagementDomainState, UserManagementEvent, UserStore, view,
};
use userdeck_model::{SortConfig, SortKey, SortOrder, UserField, UserId};

#[derive(Parser)]
#[command(name = "userdeck", about = "Browse and manage users of a JSONPlaceholder-style API")]
struct Cli {
    /// Base URL of the users API (overrides config file and environment)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Config file to read instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List users with search, filters, sorting and paging
    List(ListArgs),
    /// Show every attribute of one user
    Show { id: UserId },
    /// Create a user
    Add(FieldArgs),
    /// Edit a user; omitted fields keep their current value
    Edit {
        id: UserId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a user after confirmation
    Delete {
        id: UserId,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

impl Command {
    /// `show` goes straight to the single-record endpoint; everything else
    /// works on the fetched list.
    fn needs_collection(&self) -> bool {
        !matches!(self, Command::Show { .. })
    }
}

#[derive(Args)]
struct ListArgs {
    /// Free-text search over name, email, department and id
    #[arg(long, short = 's')]
    search: Option<String>,
    #[command(flatten)]
    filters: FieldArgs,
    /// Column to sort by: id, first-name, last-name, email, department
    #[arg(long)]
    sort: Option<SortKey>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,
    #[arg(long, default_value_t = 1)]
    page: usize,
    #[arg(long)]
    page_size: Option<usize>,
}

#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    department: Option<String>,
}

impl FieldArgs {
    fn messages(self, to_message: impl Fn(UserField, String) -> Message) -> Vec<Message> {
        [
            (UserField::FirstName, self.first_name),
            (UserField::LastName, self.last_name),
            (UserField::Email, self.email),
            (UserField::Department, self.department),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| to_message(field, v)))
        .collect()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url)?;
    }
    info!("Using users API at {}", config.api_base_url);

    let client = Arc::new(ApiClient::new(config.api_base_url.clone())?);
    let service = Arc::new(UserAdminApiAdapter::new(client));
    let store = UserStore::with_page_size(service, config.page_size);
    let mut domain = UserManagementDomain::new(UserManagementDomainState::new(store));

    if cli.command.needs_collection() {
        dispatch(&mut domain, vec![Message::LoadUsers]).await?;
    }

    match cli.command {
        Command::List(args) => {
            let mut messages = Vec::new();
            if let Some(size) = args.page_size {
                messages.push(Message::PageSizeChanged(size));
            }
            if let Some(search) = args.search {
                messages.push(Message::SearchChanged(search));
            }
            let filters = args.filters.messages(Message::FilterDraftChanged);
            if !filters.is_empty() {
                messages.extend(filters);
                messages.push(Message::ApplyFilters);
            }
            if let Some(key) = args.sort {
                let order = if args.desc {
                    SortOrder::Descending
                } else {
                    SortOrder::Ascending
                };
                messages.push(Message::SortChanged(SortConfig::new(key, order)));
            }
            messages.push(Message::PageChanged(args.page));
            dispatch(&mut domain, messages).await?;
        }
        Command::Show { id } => {
            let Some(user) = domain.state.store.fetch(id).await else {
                bail!(domain.state.store.error().unwrap_or("user not found").to_string());
            };
            print!("{}", view::render_user(&user));
            return Ok(());
        }
        Command::Add(fields) => {
            let mut messages = vec![Message::OpenAddForm];
            messages.extend(fields.messages(Message::FormFieldChanged));
            messages.push(Message::SubmitForm);
            dispatch(&mut domain, messages).await?;
        }
        Command::Edit { id, fields } => {
            if domain.state.store.user(id).is_none() {
                bail!("no user with id {id}");
            }
            let mut messages = vec![Message::OpenEditForm(id)];
            messages.extend(fields.messages(Message::FormFieldChanged));
            messages.push(Message::SubmitForm);
            dispatch(&mut domain, messages).await?;
        }
        Command::Delete { id, yes } => {
            let events = domain.update(Message::DeleteUser(id)).await;
            let Some(UserManagementEvent::DeleteConfirmationRequested { user_id, prompt }) =
                events.into_iter().next()
            else {
                bail!("no user with id {id}");
            };

            let confirmed = yes
                || Confirm::new()
                    .with_prompt(prompt)
                    .default(false)
                    .interact_on(&Term::stderr())?;
            let answer = if confirmed {
                Message::DeleteUserConfirm(user_id)
            } else {
                println!("Aborted; user {user_id} was not deleted.");
                Message::DeleteUserCancel
            };
            dispatch(&mut domain, vec![answer]).await?;
        }
    }

    let state = &domain.state;
    print!(
        "{}",
        view::render_page(
            &state.store.visible_page(),
            state.store.sort(),
            state.store.has_active_filters()
        )
    );
    Ok(())
}

/// Feed messages through the update loop, printing what the operator needs
/// to see and stopping at the first failure.
async fn dispatch(domain: &mut UserManagementDomain, messages: Vec<Message>) -> anyhow::Result<()> {
    for message in messages {
        for event in domain.update(message).await {
            match event {
                UserManagementEvent::OperationFailed(message) => {
                    eprint!("{}", view::render_error_banner(&message));
                    bail!(message);
                }
                UserManagementEvent::FormRejected => {
                    if let Some(form) = &domain.state.form {
                        eprint!("{}", view::render_form_errors(form));
                    }
                    bail!("form was not submitted");
                }
                UserManagementEvent::UserCreated(id) => println!("Created user {id}."),
                UserManagementEvent::UserUpdated(id) => println!("Updated user {id}."),
                UserManagementEvent::UserDeleted(id) => println!("Deleted user {id}."),
                UserManagementEvent::UsersLoaded(count) => info!("Loaded {} users", count),
                UserManagementEvent::DeleteConfirmationRequested { .. } => {}
            }
        }
    }
    Ok(())
}
