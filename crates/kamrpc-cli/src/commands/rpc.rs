//! Remote method commands.
//!
//! Each command returns the text to print: pretty JSON for decoded results,
//! the `OK` marker for commands without a payload.

use kamrpc_client::{JsonRpcClient, Params, RawResult};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cli::{Command, DomainAction, UacAction, UlAction};
use crate::error::{CliError, CliResult};

/// Runs a remote command and returns its rendered output.
pub async fn execute(client: &JsonRpcClient, command: Command) -> CliResult<String> {
    debug!(endpoint = client.endpoint(), command = ?command, "Executing command");

    match command {
        Command::Echo { args } => render_json(&client.core_echo(args).await?),
        Command::Uac { action } => uac(client, action).await,
        Command::Domain {
            action: DomainAction::Reload,
        } => Ok(client.domain_reload(Vec::<String>::new()).await?.to_string()),
        Command::Ul { action } => ul(client, action).await,
        Command::Call {
            method,
            params,
            json,
        } => {
            let params = call_params(params, json.as_deref())?;
            render_raw(&client.call(&method, params).await?)
        }
        Command::Config { .. } => Err(CliError::Argument(
            "config commands do not contact the server".to_string(),
        )),
    }
}

async fn uac(client: &JsonRpcClient, action: UacAction) -> CliResult<String> {
    let marker = match action {
        UacAction::Enable { params } => client.uac_reg_enable(params).await?,
        UacAction::Disable { params } => client.uac_reg_disable(params).await?,
        UacAction::Reload { params } => client.uac_reg_reload(params).await?,
        UacAction::Refresh { params } => client.uac_reg_refresh(params).await?,
        UacAction::Info { params } => return render_json(&client.uac_reg_info(params).await?),
    };
    Ok(marker.to_string())
}

async fn ul(client: &JsonRpcClient, action: UlAction) -> CliResult<String> {
    match action {
        UlAction::Dump { params } => render_json(&client.ul_dump(params).await?),
        UlAction::Lookup { table, aor } => render_json(&client.ul_lookup([table, aor]).await?),
    }
}

/// Builds the parameters for a raw call.
///
/// `--json` sends one structured parameter; otherwise each string is its own
/// positional parameter.
pub fn call_params(params: Vec<String>, json: Option<&str>) -> CliResult<Params> {
    match json {
        Some(json) => {
            let value: Value = serde_json::from_str(json)
                .map_err(|e| CliError::Argument(format!("invalid --json value: {}", e)))?;
            Ok(Params::Single(value))
        }
        None => Ok(Params::List(params)),
    }
}

/// Renders a value as pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders an undecoded result as pretty JSON.
pub fn render_raw(raw: &RawResult) -> CliResult<String> {
    let value = raw.to_value()?;
    render_json(&value)
}
