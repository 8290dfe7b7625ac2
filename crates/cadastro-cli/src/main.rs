//! cadastro CLI
//!
//! Command-line front end for registering job roles.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use cadastro_forms::{
    ConsoleNotifier, Field, FormConfig, HttpTransport, JobRoleForm, Notifier, Transport,
    DEFAULT_ENDPOINT,
};

/// Interactive input that blanks the field being prompted.
const CLEAR_FIELD: &str = "-";

/// Register job roles with the job-roles service.
#[derive(Parser)]
#[command(name = "cadastro")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job-roles creation endpoint.
    #[arg(short, long, env = "CADASTRO_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds.
    #[arg(short, long, env = "CADASTRO_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one job role and exit.
    Submit {
        /// Name of the role.
        #[arg(long)]
        nome: String,

        /// Optional description.
        #[arg(long, default_value = "")]
        descricao: String,

        /// Salary, digits only.
        #[arg(long)]
        salario: String,

        /// Hiring company.
        #[arg(long)]
        empresa: String,
    },

    /// Fill in the form field by field, correcting and resubmitting as needed.
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = FormConfig::new().endpoint(cli.endpoint);
    if let Some(secs) = cli.timeout {
        config = config.timeout(Duration::from_secs(secs));
    }
    debug!(endpoint = %config.endpoint, timeout = ?config.timeout, "using endpoint");

    let mut form = JobRoleForm::new(HttpTransport::new(&config)?, ConsoleNotifier);

    let success = match cli.command {
        Commands::Submit {
            nome,
            descricao,
            salario,
            empresa,
        } => {
            submit_once(
                &mut form,
                [
                    (Field::Name, nome),
                    (Field::Description, descricao),
                    (Field::Salary, salario),
                    (Field::Company, empresa),
                ],
            )
            .await
        }

        Commands::Interactive => interactive(&mut form, io::stdin().lock(), io::stdout()).await?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Applies each value as a field edit and submits once. Returns whether the
/// record was created.
async fn submit_once<T: Transport, N: Notifier>(
    form: &mut JobRoleForm<T, N>,
    values: [(Field, String); 4],
) -> bool {
    for (field, value) in values {
        form.on_field_change(field, &value);
    }
    form.submit().await.is_success()
}

/// Prompts for every field, submits, and loops while the user wants to go on.
///
/// An empty line keeps the current value and a lone `-` clears it. Returns
/// whether the last submission created the record. End of input while
/// prompting ends the session successfully.
async fn interactive<T, N, R, W>(
    form: &mut JobRoleForm<T, N>,
    input: R,
    mut output: W,
) -> anyhow::Result<bool>
where
    T: Transport,
    N: Notifier,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        writeln!(
            output,
            "\nCadastro de profissão (Enter mantém o valor atual, {CLEAR_FIELD} limpa o campo)"
        )?;
        for field in Field::ALL {
            let current = form.record().get(field).to_string();
            write!(output, "{} [{current}]: ", field.def().label)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                return Ok(true);
            };
            let line = line?;
            if line == CLEAR_FIELD {
                form.on_field_change(field, "");
            } else if !line.is_empty() {
                form.on_field_change(field, &line);
            }
        }

        let success = form.submit().await.is_success();
        let question = if success {
            "Cadastrar outra profissão? [s/N] "
        } else {
            "Corrigir e enviar novamente? [s/N] "
        };
        write!(output, "{question}")?;
        output.flush()?;

        let answer = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };
        if !answer.trim().eq_ignore_ascii_case("s") {
            return Ok(success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use cadastro_forms::{MemoryNotifier, REQUIRED_FIELDS_MESSAGE};
    use clap::CommandFactory;
    use mockito::{Matcher, Server};

    const PATH: &str = "/api/profissoes";

    fn http_form(server: &Server) -> JobRoleForm<HttpTransport, MemoryNotifier> {
        let config = FormConfig::new()
            .endpoint(format!("{}{PATH}", server.url()))
            .timeout(Duration::from_secs(5));
        JobRoleForm::new(HttpTransport::new(&config).unwrap(), MemoryNotifier::new())
    }

    fn body(descricao: &str) -> Matcher {
        Matcher::JsonString(format!(
            r#"{{"nome":"Ana","descricao":"{descricao}","salario":"1500","empresa":"Acme"}}"#
        ))
    }

    fn values(nome: &str) -> [(Field, String); 4] {
        [
            (Field::Name, nome.to_string()),
            (Field::Description, String::new()),
            (Field::Salary, "1500".to_string()),
            (Field::Company, "Acme".to_string()),
        ]
    }

    #[tokio::test]
    async fn test_interactive_corrects_and_resubmits() {
        let mut server = Server::new_async().await;
        let rejected = server
            .mock("POST", PATH)
            .match_body(body("Vaga remota"))
            .with_status(400)
            .with_body(r#"{"message":"Duplicate role"}"#)
            .expect(1)
            .create_async()
            .await;
        let created = server
            .mock("POST", PATH)
            .match_body(body(""))
            .with_status(201)
            .with_body(r#"{"message":"Created"}"#)
            .expect(1)
            .create_async()
            .await;

        let mut form = http_form(&server);
        // First pass fills every field; the second keeps all but the
        // description, which is cleared.
        let input = "Ana\nVaga remota\n1500\nAcme\ns\n\n-\n\n\n\n";
        let mut output = Vec::new();
        let success = interactive(&mut form, Cursor::new(input), &mut output)
            .await
            .unwrap();

        rejected.assert_async().await;
        created.assert_async().await;
        assert!(success);
        assert_eq!(form.notifier().messages(), ["Erro: Duplicate role", "Created"]);
        assert!(form.record().is_empty());

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("- limpa o campo"));
        assert!(output.contains("Descrição [Vaga remota]: "));
        assert!(output.contains("Corrigir e enviar novamente? [s/N] "));
        assert!(output.contains("Cadastrar outra profissão? [s/N] "));
    }

    #[tokio::test]
    async fn test_interactive_keeps_record_when_user_gives_up() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(400)
            .with_body(r#"{"message":"Duplicate role"}"#)
            .expect(1)
            .create_async()
            .await;

        let mut form = http_form(&server);
        let input = "Ana\n\n1500\nAcme\nn\n";
        let success = interactive(&mut form, Cursor::new(input), Vec::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(!success);
        assert_eq!(form.record().name(), "Ana");
        assert_eq!(form.record().company(), "Acme");
    }

    #[tokio::test]
    async fn test_interactive_stops_at_end_of_input() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let mut form = http_form(&server);
        let success = interactive(&mut form, Cursor::new("Ana\n"), Vec::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(success);
        assert_eq!(form.record().name(), "Ana");
    }

    #[tokio::test]
    async fn test_submit_once_reports_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_body(body(""))
            .with_status(201)
            .with_body(r#"{"message":"Created"}"#)
            .expect(1)
            .create_async()
            .await;

        let mut form = http_form(&server);
        assert!(submit_once(&mut form, values("Ana")).await);

        mock.assert_async().await;
        assert_eq!(form.notifier().last(), Some("Created"));
    }

    #[tokio::test]
    async fn test_submit_once_drops_inadmissible_values() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let mut form = http_form(&server);
        assert!(!submit_once(&mut form, values("Ana1")).await);

        mock.assert_async().await;
        assert_eq!(form.record().name(), "");
        assert_eq!(form.notifier().last(), Some(REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_submit_args() {
        let cli = Cli::try_parse_from([
            "cadastro",
            "--endpoint",
            "http://localhost:9000/api/profissoes",
            "submit",
            "--nome",
            "Ana",
            "--salario",
            "1500",
            "--empresa",
            "Acme",
        ])
        .unwrap();

        assert_eq!(cli.endpoint, "http://localhost:9000/api/profissoes");
        match cli.command {
            Commands::Submit {
                nome,
                descricao,
                salario,
                empresa,
            } => {
                assert_eq!(nome, "Ana");
                assert_eq!(descricao, "");
                assert_eq!(salario, "1500");
                assert_eq!(empresa, "Acme");
            }
            Commands::Interactive => panic!("expected submit"),
        }
    }

    #[test]
    fn test_submit_requires_salary() {
        let result = Cli::try_parse_from(["cadastro", "submit", "--nome", "Ana", "--empresa", "Acme"]);
        assert!(result.is_err());
    }
}
