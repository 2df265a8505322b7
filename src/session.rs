//! Line-driven screening form for terminals.
//!
//! Plain lines are appended to the job description draft; lines starting with
//! `:` are commands.

use crate::core::client::{FetchOutcome, ScreeningClient};
use crate::domain::model::ModelChoice;
use crate::domain::ports::ScoringBackend;
use crate::report::render_text;
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const HELP: &str = "\
Commands:
  :model <name>   choose Neural Net, XGBoost or Spacy Similarity
  :fetch          get top candidates for the current description
  :clear          clear the candidate list
  :new            start a new job description
  :show           show the model, draft and candidates
  :help           show this help
  :quit           leave the session
";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Text(String),
    Model(String),
    Fetch,
    Clear,
    New,
    Show,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> SessionCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return SessionCommand::Text(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name.to_lowercase().as_str() {
        "model" => SessionCommand::Model(rest.to_string()),
        "fetch" | "submit" => SessionCommand::Fetch,
        "clear" => SessionCommand::Clear,
        "new" => SessionCommand::New,
        "show" => SessionCommand::Show,
        "help" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(trimmed.to_string()),
    }
}

pub struct ScreeningSession<'a, B: ScoringBackend> {
    client: &'a ScreeningClient<B>,
}

impl<'a, B: ScoringBackend> ScreeningSession<'a, B> {
    pub fn new(client: &'a ScreeningClient<B>) -> Self {
        Self { client }
    }

    /// Runs until `:quit` or end of input.
    pub async fn run<R, W>(&self, reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let banner = format!(
            "Candidate Screening\nModel: {}\nType the job description, then :fetch. :help lists commands.\n",
            self.client.selected_model()
        );
        writer.write_all(banner.as_bytes()).await?;
        writer.flush().await?;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let command = parse_line(&line);
            tracing::debug!("Session command: {:?}", command);

            if command == SessionCommand::Quit {
                break;
            }

            let output = self.execute(command, writer).await?;
            writer.write_all(output.as_bytes()).await?;
            writer.flush().await?;
        }

        Ok(())
    }

    async fn execute<W>(&self, command: SessionCommand, writer: &mut W) -> Result<String>
    where
        W: AsyncWrite + Unpin,
    {
        let output = match command {
            SessionCommand::Text(text) => {
                let draft = self.client.snapshot().job_description;
                if draft.is_empty() {
                    self.client.set_job_description(text);
                } else {
                    self.client.set_job_description(format!("{}\n{}", draft, text));
                }
                String::new()
            }
            SessionCommand::Model(name) => match name.parse::<ModelChoice>() {
                Ok(model) => {
                    self.client.set_selected_model(model);
                    format!("Model: {}\n", model)
                }
                Err(e) => format!("{}\n", e),
            },
            SessionCommand::Fetch => {
                writer.write_all(b"Loading...\n").await?;
                writer.flush().await?;

                match self.client.fetch_candidates().await {
                    FetchOutcome::Superseded => String::new(),
                    FetchOutcome::Loaded { .. } | FetchOutcome::Failed { .. } => {
                        render_text(&self.client.candidates())
                    }
                }
            }
            SessionCommand::Clear => {
                self.client.clear_candidates();
                render_text(&[])
            }
            SessionCommand::New => {
                self.client.set_job_description("");
                "Job description cleared.\n".to_string()
            }
            SessionCommand::Show => {
                let state = self.client.snapshot();
                format!(
                    "Model: {}\nJob description ({} chars):\n{}\n{}",
                    state.selected_model,
                    state.job_description.chars().count(),
                    state.job_description,
                    render_text(&state.candidates)
                )
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Unknown(raw) => {
                format!("Unknown command '{}'. Type :help for commands.\n", raw)
            }
            SessionCommand::Quit => String::new(),
        };
        Ok(output)
    }
}
