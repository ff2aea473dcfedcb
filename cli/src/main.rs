mod http;
mod terminal;


use std::io::{self, Stdout, Write};

use clap::{Parser, Subcommand};
use noventa::config::ConfigError;
use noventa::{
    ApiError, Board, BoardController, BoardError, BoardView, Command, GameApi, GameConfig, MoveOutcome, MoveResponse,
    ProtocolError,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::http::HttpGameApi;
use crate::terminal::{FORMAT_HELP, PlayInput, TerminalView, WELCOME, parse_play_input};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Board(#[from] BoardError),
    #[error("{0}")]
    Protocol(#[from] ProtocolError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("server did not accept the command: {0}")]
    NotAccepted(String),
    #[error("could not reach the game server")]
    Unreachable,
}

#[derive(Parser, Debug)]
#[command(name = "noventa-cli", about = "Terminal client for a Noventa Grados game server")]
struct Cli {
    #[arg(long, env = "NOVENTA_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print the current board.
    Board {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Submit one move, e.g. `12-34`.
    Move { jugada: String },
    /// Undo the last move.
    Undo,
    /// End the game.
    Quit,
    /// Interactive session reading moves from stdin.
    Play,
}

type TerminalController = BoardController<HttpGameApi, TerminalView<Stdout>>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = GameConfig::from_env()?.with_base_url(&cli.base_url)?;
    let api = HttpGameApi::new(config)?;
    tracing::debug!(board_url = %api.config().board_url(), "game server configured");

    match cli.command {
        CliCommand::Board { json } => run_board(&api, json).await,
        CliCommand::Move { jugada } => {
            let request = jugada.parse()?;
            let mut controller = terminal_controller(api);
            ensure_loaded(&mut controller).await?;
            expect_accepted(controller.play_move(request).await)
        }
        CliCommand::Undo => {
            let mut controller = terminal_controller(api);
            ensure_loaded(&mut controller).await?;
            expect_accepted(controller.undo().await)
        }
        CliCommand::Quit => {
            let mut controller = terminal_controller(api);
            expect_accepted(controller.quit().await)
        }
        CliCommand::Play => {
            let mut controller = terminal_controller(api);
            let input = BufReader::new(tokio::io::stdin());
            run_play(&mut controller, input, &mut io::stdout()).await
        }
    }
}

fn terminal_controller(api: HttpGameApi) -> TerminalController {
    BoardController::new(api, TerminalView::new(io::stdout()))
}

async fn ensure_loaded(controller: &mut TerminalController) -> Result<(), CliError> {
    if controller.start().await {
        Ok(())
    } else {
        Err(CliError::Unreachable)
    }
}

fn expect_accepted(response: Option<MoveResponse>) -> Result<(), CliError> {
    let response = response.ok_or(CliError::Unreachable)?;
    match response.outcome {
        MoveOutcome::Applied | MoveOutcome::Undone | MoveOutcome::Ended => Ok(()),
        _ => Err(CliError::NotAccepted(response.message)),
    }
}

async fn run_board(api: &HttpGameApi, json: bool) -> Result<(), CliError> {
    let text = api.fetch_board().await?;
    let board = Board::parse(&text)?;
    if json {
        println!("{}", serde_json::to_string_pretty(board.cells())?);
    } else {
        print!("{}", board.to_text());
    }
    Ok(())
}

/// Interactive loop over `input`, one command per line, until EOF or `salir`.
///
/// A `dd-dd` move goes through the same two clicks a browser user would
/// make, so an empty origin selects nothing and the destination click
/// becomes the new selection.
async fn run_play<A, V, R>(
    controller: &mut BoardController<A, V>,
    input: R,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    A: GameApi,
    V: BoardView,
    R: AsyncBufRead + Unpin,
{
    writeln!(out, "{WELCOME}")?;
    controller.start().await;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_play_input(&line) {
            PlayInput::Blank => {}
            PlayInput::Click(coord) => controller.click_at(coord).await,
            PlayInput::Command(Command::Move(request)) => {
                controller.click_at(request.origin).await;
                controller.click_at(request.destination).await;
            }
            PlayInput::Command(Command::Undo) => {
                controller.undo().await;
            }
            PlayInput::Command(Command::Quit) => {
                controller.quit().await;
                break;
            }
            PlayInput::Invalid(text) => {
                tracing::debug!(%text, "unrecognized input");
                writeln!(out, "{FORMAT_HELP}")?;
            }
        }
    }

    writeln!(out, "Partida finalizada.")?;
    Ok(())
}
