use clap::{Parser, Subcommand};
use descriptor::request::{self, DEFAULT_API_BASE, HttpMethod, PRESET_ENDPOINTS, SPECIAL_ACTIONS};
use descriptor::role::UnknownRole;
use descriptor::{ApiError, Role};
use runtime_ui_cli::ApiClient;
use runtime_ui_cli::render::render_plan;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Role(#[from] UnknownRole),
}

#[derive(Parser, Debug)]
#[command(name = "runtime-ui-cli", about = "Role-aware client for the runtime UI backend")]
struct Cli {
    #[arg(long, env = "RUNTIME_UI_API_BASE", default_value = DEFAULT_API_BASE)]
    base_url: String,

    #[arg(long, env = "RUNTIME_UI_ROLE", default_value = "viewer")]
    role: Role,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// GET / on the backend.
    Health,
    /// GET /api/demo-info.
    DemoInfo,
    /// Menu entries visible to the role; falls back to the role preset.
    Menu,
    /// GET /api/user-context/{role}.
    Context { role: Option<String> },
    /// Arbitrary request; prints the raw JSON response.
    Request {
        method: HttpMethod,
        path: String,
        #[arg(long)]
        data: Option<String>,
        /// Send `X-UI-Request: true`.
        #[arg(long, default_value_t = false)]
        ui: bool,
    },
    /// Fetch a descriptor endpoint, transform it, and print the layout plan.
    Describe {
        path: String,
        #[arg(long, default_value_t = false)]
        embedded: bool,
        /// Print the transformed response as JSON instead.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the API tester presets.
    Presets,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(cli.base_url);
    let role = cli.role;
    tracing::debug!(base_url = client.base_url(), %role, "starting");

    match cli.command {
        Command::Health => print_json(&client.send(&request::health_check(role)).await?),
        Command::DemoInfo => print_json(&client.send(&request::demo_info(role)).await?),
        Command::Menu => run_menu(&client, role).await,
        Command::Context { role: target } => {
            let target = match target {
                Some(raw) => raw.parse::<Role>()?,
                None => role,
            };
            let context = client.user_context(target).await?;
            print_json(&serde_json::to_value(&context)?)
        }
        Command::Request {
            method,
            path,
            data,
            ui,
        } => {
            let body = request::parse_body(method, data.as_deref().unwrap_or_default())?;
            let outgoing = request::arbitrary(&path, method, role, body, ui);
            print_json(&client.send(&outgoing).await?)
        }
        Command::Describe {
            path,
            embedded,
            json,
        } => {
            let response = client.fetch_descriptor(&path, role).await?;
            if json {
                print_json(&serde_json::to_value(&response)?)
            } else {
                print!("{}", render_plan(&response, embedded));
                Ok(())
            }
        }
        Command::Presets => {
            for preset in PRESET_ENDPOINTS.iter().chain(SPECIAL_ACTIONS.iter()) {
                println!("{:<6} {:<28} {}", preset.method.as_str(), preset.path, preset.description);
            }
            Ok(())
        }
    }
}

async fn run_menu(client: &ApiClient, role: Role) -> Result<(), CliError> {
    let items = match client.menu_items(role).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, %role, "menu unavailable, using role preset");
            role.fallback_menu()
        }
    };
    for item in items {
        println!("{:<12} {}", item.key, item.label);
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
