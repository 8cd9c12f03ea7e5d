use anyhow::{Context, bail};
use std::str::FromStr;
use tilesweep_core::{CellCount, Coord, Coord2};

pub const HELP: &str = "\
commands:
  r COL ROW       reveal a cell (also: reveal)
  f COL ROW       place or remove a flag (also: flag)
  finish          end the game and uncover the board
  reset [N M]     new game, optionally N x N with M mines
  time            show elapsed time
  pause           stop the clock
  resume          start the clock again
  help            show this help
  quit            leave (also: q, exit)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Finish,
    Reset(Option<(Coord, CellCount)>),
    Time,
    Pause,
    Resume,
    Help,
    Quit,
}

fn parse_coords<'a>(mut args: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let col = args.next().context("missing column")?;
    let row = args.next().context("missing row")?;
    if args.next().is_some() {
        bail!("expected only a column and a row");
    }
    let col = col.parse().with_context(|| format!("bad column: {col}"))?;
    let row = row.parse().with_context(|| format!("bad row: {row}"))?;
    Ok((col, row))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        Ok(match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(words)?),
            "f" | "flag" => Command::Flag(parse_coords(words)?),
            "finish" => Command::Finish,
            "reset" => match (words.next(), words.next()) {
                (None, _) => Command::Reset(None),
                (Some(dimension), Some(mines)) => {
                    let dimension = dimension
                        .parse()
                        .with_context(|| format!("bad dimension: {dimension}"))?;
                    let mines = mines
                        .parse()
                        .with_context(|| format!("bad mine count: {mines}"))?;
                    Command::Reset(Some((dimension, mines)))
                }
                (Some(_), None) => bail!("reset takes a dimension and a mine count"),
            },
            "time" => Command::Time,
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => bail!("unknown command: {other}"),
        })
    }
}
