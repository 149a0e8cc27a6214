use taskarena::{cli, telemetry};

fn main() {
    let cli = cli::parse_from(std::env::args_os());
    telemetry::init(cli.verbose);

    let command = cli::command_name(&cli.command);
    let span = tracing::info_span!("cli_command", command = %command);
    let _guard = span.enter();

    if let Err(e) = cli::run(cli) {
        tracing::error!("error: {}", e);
        std::process::exit(1);
    }
}
