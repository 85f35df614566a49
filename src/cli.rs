use std::io::Write;
use std::io::{stdin, stdout};

use clap::{Arg, ArgAction, Command};
use itertools::Itertools;

use crate::action::*;
use crate::card_api::CardSource;
use crate::context::Context;
use crate::error::{GuessError, Result};
use crate::models::difficulty::Difficulty;
use crate::opt::*;
use crate::render::*;
use crate::round::{GuessOutcome, RoundState};

/// The REPL's view of the world: one round plus the services it needs.
pub struct Game<S: CardSource> {
    state: RoundState,
    source: S,
    context: Context,
}

impl<S: CardSource> Game<S> {
    pub fn new(source: S, context: Context) -> Self {
        Game {
            state: RoundState::default(),
            source,
            context,
        }
    }

    async fn start<W: Write>(&mut self, difficulty: Option<&str>, out: &mut W) -> Result<()> {
        let difficulty = difficulty
            .map(Difficulty::parse_or_default)
            .unwrap_or_else(|| self.context.last_difficulty());

        writeln!(out, "Drawing a random monster ...")?;
        out.flush()?;
        let answer = self.source.fetch_random_monster_card().await?;
        self.state = std::mem::take(&mut self.state).start(answer, difficulty);

        if let Err(err) = self.context.set_last_difficulty(difficulty) {
            log_if(&format!("Unable to save difficulty: {}", err), DbgFlg::Round);
        }
        writeln!(out, "{}", render_start(difficulty))?;
        self.lists(out)
    }

    async fn guess<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let transition = std::mem::take(&mut self.state)
            .submit(&self.source, name)
            .await;
        self.state = transition.state;

        match transition.outcome? {
            GuessOutcome::Ignored => {}
            GuessOutcome::Duplicate { name } => {
                writeln!(out, "You already guessed [{}].", name)?;
            }
            GuessOutcome::NotFound { name } => {
                writeln!(out, "No card named [{}], check the spelling.", name)?;
            }
            GuessOutcome::LookupFailed { name, error } => {
                writeln!(out, "Unable to look up [{}]: {}. Please try again.", name, error)?;
            }
            GuessOutcome::Evaluated { result, won } => {
                writeln!(
                    out,
                    "{}",
                    render_comparison(&result, self.state.attributes(), self.state.races())
                )?;
                if let (true, Some(answer)) = (won, self.state.answer()) {
                    writeln!(out, "{}", render_win(answer))?;
                }
            }
        }

        Ok(())
    }

    fn hint<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let transition = std::mem::take(&mut self.state).hint();
        self.state = transition.state;

        let hint = transition.outcome?;
        writeln!(out, "{}", render_hint(&hint, self.state.hints_remaining()))?;
        Ok(())
    }

    fn lists<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut rng = rand::thread_rng();
        let attributes = self.state.attributes().shuffled(&mut rng);
        let races = self.state.races().shuffled(&mut rng);

        writeln!(out, "{}", render_lists(&attributes, &races))?;
        Ok(())
    }

    fn history<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}\n", render_round_summary(&self.state))?;
        writeln!(
            out,
            "{}",
            render_history(self.state.history(), self.state.attributes(), self.state.races())
        )?;
        Ok(())
    }
}

pub async fn main<S: CardSource>(game: &mut Game<S>) -> Result<()> {
    while let Some(line) = readline()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(game, line, &mut stdout()).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(stdout(), "{err}")?;
                stdout().flush()?;
            }
        }
    }

    Ok(())
}

async fn respond<S: CardSource, W: Write>(
    game: &mut Game<S>,
    line: &str,
    out: &mut W,
) -> Result<bool> {
    let args = shlex::split(line)
        .ok_or_else(|| GuessError::InvalidCommand("invalid quoting".to_string()))?;
    let matches = match cli().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            write!(out, "{err}")?;
            out.flush()?;
            return Ok(false);
        }
    };

    match matches.subcommand() {
        Some(("ping", _matches)) => {
            writeln!(out, "Pong")?;
        }
        Some(("quit", _matches)) => {
            writeln!(out, "Exiting ...")?;
            out.flush()?;
            return Ok(true);
        }
        Some((START_CMD, matches)) => {
            let difficulty = matches.get_one::<String>(DIFFICULTY_ARG);
            game.start(difficulty.map(String::as_str), out).await?;
        }
        Some((GUESS_CMD, matches)) => {
            let name = matches
                .get_many::<String>(NAME_ARG)
                .map(|mut words| words.join(" "))
                .unwrap_or_default();
            game.guess(&name, out).await?;
        }
        Some((HINT_CMD, _matches)) => game.hint(out)?,
        Some((LISTS_CMD, _matches)) => game.lists(out)?,
        Some((HISTORY_CMD, _matches)) => game.history(out)?,
        Some((name, _matches)) => return Err(GuessError::InvalidCommand(name.to_string())),
        None => unreachable!("subcommand required"),
    }
    out.flush()?;

    Ok(false)
}

fn cli() -> Command {
    // strip out usage
    const PARSER_TEMPLATE: &str = "\
        {all-args}
    ";
    // strip out name/version
    const COMMAND_TEMPLATE: &str = "\
        {about-with-newline}\n\
        {usage-heading}\n    {usage}\n\
        \n\
        {all-args}{after-help}\
    ";

    let mut cmd = Command::new("repl")
        .multicall(true)
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand_value_name("COMMAND")
        .subcommand_help_heading("COMMANDS")
        .help_template(PARSER_TEMPLATE)
        .subcommand(
            Command::new("ping")
                .about("Get a response")
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("quit")
                .alias("exit")
                .alias("q")
                .alias(":q")
                .about("Quit the REPL")
                .help_template(COMMAND_TEMPLATE),
        );

    for action in ACTIONS.iter() {
        let mut subcommand = Command::new(action.cmd)
            .about(action.desc)
            .help_template(COMMAND_TEMPLATE);

        if let Some(arg) = &action.arg {
            let mut clap_arg = Arg::new(arg.name).help(arg.help).required(arg.required);
            if arg.multiple {
                clap_arg = clap_arg
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .allow_hyphen_values(true);
            }
            subcommand = subcommand.arg(clap_arg);
        }

        cmd = cmd.subcommand(subcommand);
    }

    cmd
}

/// `None` once stdin is closed.
fn readline() -> Result<Option<String>> {
    write!(stdout(), "> ")?;
    stdout().flush()?;
    let mut buffer = String::new();
    let read = stdin().read_line(&mut buffer)?;
    Ok((read > 0).then_some(buffer))
}
