use crate::app::presenter;
use crate::core::report::write_lines;
use crate::core::{RecordService, Storage, Worker};
use crate::utils::error::{HrError, Result};
use crate::utils::validation::{parse_code, parse_decimal, required_text};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &[&str] = &[
    "Comandos:",
    "  1 | add <código>;<nome>;<cargo>;<salário>[;<dep1>,<dep2>,...]",
    "  2 | report",
    "  3 | remove <código>",
    "  4 | salary <código> <novo salário>",
    "  5 | quit",
    "  list | save <arquivo> | help",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        worker: Worker,
        dependents: Vec<String>,
    },
    Report,
    Save {
        path: String,
    },
    Remove {
        code: i32,
    },
    Salary {
        code: i32,
        salary: f64,
    },
    List,
    Help,
    Quit,
}

impl Command {
    /// Parses one operator line. Menu numbers 1-5 are accepted as aliases.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        match verb.to_lowercase().as_str() {
            "1" | "add" => Self::parse_add(rest),
            "2" | "report" => Ok(Command::Report),
            "3" | "remove" => Ok(Command::Remove {
                code: parse_code("código", rest)?,
            }),
            "4" | "salary" => {
                let (code, salary) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    HrError::input("Uso: salary <código> <novo salário>")
                })?;
                Ok(Command::Salary {
                    code: parse_code("código", code)?,
                    salary: parse_decimal("salário", salary)?,
                })
            }
            "5" | "quit" | "exit" => Ok(Command::Quit),
            "save" => Ok(Command::Save {
                path: required_text("arquivo", rest)?,
            }),
            "list" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "" => Err(HrError::input("Entrada vazia.")),
            _ => Err(HrError::input(format!("Opção inválida: {}", verb))),
        }
    }

    fn parse_add(rest: &str) -> Result<Self> {
        let fields: Vec<&str> = rest.splitn(5, ';').collect();
        if fields.len() < 4 {
            return Err(HrError::input(
                "Uso: add <código>;<nome>;<cargo>;<salário>[;<dep1>,<dep2>,...]",
            ));
        }

        let worker = Worker::new(
            parse_code("código", fields[0])?,
            required_text("nome", fields[1])?,
            required_text("cargo", fields[2])?,
            parse_decimal("salário", fields[3])?,
        );
        // Blank names are kept here; the record service drops them on registration.
        let dependents = fields
            .get(4)
            .map(|deps| deps.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Command::Add { worker, dependents })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Message(String),
    Lines(Vec<String>),
    Saved(String),
    Quit,
}

/// Line-oriented front end over a [`RecordService`].
pub struct Session<S: Storage> {
    service: RecordService,
    storage: S,
}

impl<S: Storage> Session<S> {
    pub fn new(service: RecordService, storage: S) -> Self {
        Self { service, storage }
    }

    pub fn service(&self) -> &RecordService {
        &self.service
    }

    pub async fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add { worker, dependents } => {
                let code = worker.code();
                self.service.register(worker, &dependents)?;
                tracing::info!(
                    "Worker {} registered with {} dependent(s)",
                    code,
                    self.service.count_dependents(code)
                );
                Ok(Outcome::Message(
                    "Funcionário cadastrado com sucesso.".to_string(),
                ))
            }
            Command::Report => Ok(Outcome::Lines(presenter::display_lines(
                &self.service.bonus_report(),
            ))),
            Command::Save { path } => {
                let lines = presenter::display_lines(&self.service.bonus_report());
                write_lines(&self.storage, &path, &lines).await?;
                tracing::info!("Report saved to {}", path);
                Ok(Outcome::Saved(path))
            }
            Command::Remove { code } => {
                self.service.remove_worker(code)?;
                tracing::info!("Worker {} removed", code);
                Ok(Outcome::Message(
                    "Funcionário e dependentes excluídos.".to_string(),
                ))
            }
            Command::Salary { code, salary } => {
                self.service.set_salary(code, salary)?;
                tracing::info!("Worker {} salary set to {:.2}", code, salary);
                Ok(Outcome::Message("Salário alterado com sucesso.".to_string()))
            }
            Command::List => {
                let mut workers: Vec<&Worker> = self.service.list_workers().collect();
                workers.sort_by_key(|w| w.code());
                Ok(Outcome::Lines(
                    workers
                        .into_iter()
                        .map(|w| presenter::worker_line(w, self.service.count_dependents(w.code())))
                        .collect(),
                ))
            }
            Command::Help => Ok(Outcome::Lines(HELP.iter().map(|l| l.to_string()).collect())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Reads commands until `quit` or end of input. Errors are reported and the loop continues.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        writer
            .write_all("Gerenciamento RH - digite `help` para ver os comandos.\n".as_bytes())
            .await?;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let result = match Command::parse(&line) {
                Ok(command) => self.execute(command).await,
                Err(e) => Err(e),
            };

            let output = match result {
                Ok(Outcome::Message(message)) => vec![message],
                Ok(Outcome::Lines(rows)) => rows,
                Ok(Outcome::Saved(path)) => vec![format!("Arquivo salvo em: {}", path)],
                Ok(Outcome::Quit) => {
                    writer.write_all("Encerrando aplicação.\n".as_bytes()).await?;
                    break;
                }
                Err(e) => {
                    tracing::warn!("Command failed: {} ({:?})", e, e.category());
                    vec![format!("Erro: {}", e.user_friendly_message())]
                }
            };

            for out in output {
                writer.write_all(out.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
        }

        writer.flush().await?;
        Ok(())
    }
}
