// src/main.rs
use anyhow::Result;
use endpoint_check::{
    cli::{self, Args},
    config::PluginInfo,
    health::{EndpointRegistry, Status},
    plugin::{self, Plugin},
};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Initialize tracing on stderr; stdout carries the check output.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("endpoint_check=info".parse()?),
        )
        .init();

    let info = PluginInfo::endpoint_check();
    let config = match Args::try_parse_for(&info, std::env::args_os()) {
        Ok(args) => args.into_config(),
        Err(e) => {
            e.print()?;
            return Ok(exit_code(cli::parse_error_status(&e)));
        }
    };
    let name = info.name;

    let event = if stdin_is_piped() {
        info!("using stdin");
        match plugin::read_event(io::stdin().lock()) {
            Ok(event) => Some(event),
            Err(e) => {
                error!("{}", e);
                println!("Failed to read event: {}", e);
                return Ok(exit_code(e.status()));
            }
        }
    } else {
        None
    };

    let plugin = match EndpointRegistry::builtin().and_then(|registry| Plugin::new(info, registry)) {
        Ok(plugin) => plugin,
        Err(e) => {
            println!("Error executing {}: {}", name, e);
            return Ok(exit_code(e.status()));
        }
    };

    let status = plugin.run(config, event.as_ref()).await;
    Ok(exit_code(status))
}

fn exit_code(status: Status) -> ExitCode {
    ExitCode::from(status.code() as u8)
}

#[cfg(unix)]
fn stdin_is_piped() -> bool {
    use std::os::unix::fs::FileTypeExt;

    std::fs::metadata("/dev/stdin")
        .map(|meta| meta.file_type().is_fifo())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn stdin_is_piped() -> bool {
    use std::io::IsTerminal;

    !io::stdin().is_terminal()
}
