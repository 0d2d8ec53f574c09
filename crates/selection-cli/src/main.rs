use anyhow::Context;
use selection_cli::{cli, config, logging, Command, Invocation, Status};
use selection_client::HttpClient;
use std::io::{self, Read};
use std::process::ExitCode;

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read paragraph input from stdin")?;
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(buf)
}

async fn run(mut invocation: Invocation) -> anyhow::Result<Status> {
    if let Command::Paragraph { input, .. } = &mut invocation.command {
        if input.is_none() {
            *input = Some(read_stdin()?);
        }
    }

    let config = config::client_config(
        invocation.config_path.as_deref(),
        invocation.base_url.as_deref(),
    )?;
    let client = HttpClient::new(config).context("failed to build HTTP client")?;
    tracing::info!(command = ?invocation.command, "running page");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    selection_cli::execute(&invocation.command, &client, &mut out).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli::command().get_matches();
    let Some(invocation) = Invocation::from_matches(&matches) else {
        eprintln!("no subcommand given");
        return ExitCode::from(2);
    };

    if let Err(e) = logging::init(invocation.verbosity, invocation.log_json) {
        eprintln!("{e}");
    }

    match run(invocation).await {
        Ok(status) => status.exit_code(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
