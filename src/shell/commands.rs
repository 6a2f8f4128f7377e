//! Command grammar of the shell.
//!
//! One line is one command. The first word names it (case-insensitive); the
//! rest is parsed by clap, so both `--opt value` and `--opt=value` work and
//! every command answers `--help`.

use clap::{Parser, ValueEnum};

use crate::error::{Result, SimError};
use crate::simulation::params::{WINDOW_HEIGHT, WINDOW_WIDTH, MIN_RADIUS};

pub const SUPPORTED: &str = "create, clear, set, pause, resume";

fn positive_f64(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("expected float, got '{s}'"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("must be a positive number, got '{s}'"))
    }
}

/// Create a new object in the simulation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "create", disable_version_flag = true, allow_negative_numbers = true)]
pub struct CreateArgs {
    /// choose between primary and secondary colors by their first letter (r, g, b, y, c, m, w)
    #[arg(short, long, default_value = "w")]
    pub color: String,

    /// set the radius of the circle object
    #[arg(short, long, default_value_t = MIN_RADIUS, value_parser = positive_f64)]
    pub radius: f64,

    /// set the mass of the circle object [default: area times density]
    #[arg(short, long, value_parser = positive_f64)]
    pub mass: Option<f64>,

    /// set the x coordinate of the center of the circle object
    #[arg(long, default_value_t = WINDOW_WIDTH / 2.0)]
    pub posx: f64,

    /// set the y coordinate of the center of the circle object
    #[arg(long, default_value_t = WINDOW_HEIGHT / 2.0)]
    pub posy: f64,

    /// set the velocity of the circle object in the x-axis
    #[arg(long, default_value_t = 0.0)]
    pub velx: f64,

    /// set the velocity of the circle object in the y-axis
    #[arg(long, default_value_t = 0.0)]
    pub vely: f64,
}

/// Clear all objects or optionally, a single one specified by its id
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "clear", disable_version_flag = true)]
pub struct ClearArgs {
    /// clears all objects; same as 'clear'
    #[arg(short, long, conflicts_with = "id")]
    pub all: bool,

    /// clear only the object with this id, if it exists
    #[arg(long)]
    pub id: Option<u32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

/// Set the value of any supported variable in the engine
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "set", disable_version_flag = true, arg_required_else_help = true)]
pub struct SetArgs {
    /// set collisions to be inelastic (0), or perfectly elastic (1)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub elasticity: Option<u8>,

    /// turn gravity on or off
    #[arg(short, long, value_enum, ignore_case = true)]
    pub gravity: Option<Toggle>,
}

/// Pause the simulation if not already paused, otherwise do nothing
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "pause", disable_version_flag = true)]
pub struct PauseArgs {}

/// Resume the simulation if paused, otherwise do nothing
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "resume", disable_version_flag = true)]
pub struct ResumeArgs {}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create(CreateArgs),
    Clear(ClearArgs),
    Set(SetArgs),
    Pause(PauseArgs),
    Resume(ResumeArgs),
}

impl Command {
    /// Parse one shell line. `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let name = first.to_ascii_lowercase();
        let argv = std::iter::once(name.as_str()).chain(words);

        let command = match name.as_str() {
            "create" => Command::Create(CreateArgs::try_parse_from(argv)?),
            "clear" => Command::Clear(ClearArgs::try_parse_from(argv)?),
            "set" => Command::Set(SetArgs::try_parse_from(argv)?),
            "pause" => Command::Pause(PauseArgs::try_parse_from(argv)?),
            "resume" => Command::Resume(ResumeArgs::try_parse_from(argv)?),
            _ => return Err(SimError::UnknownCommand(first.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn create_defaults() {
        let Command::Create(args) = parse("create") else { panic!("expected create") };
        assert_eq!(args.color, "w");
        assert_eq!(args.radius, MIN_RADIUS);
        assert_eq!(args.mass, None);
        assert_eq!((args.posx, args.posy), (WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0));
        assert_eq!((args.velx, args.vely), (0.0, 0.0));
    }

    #[test]
    fn create_accepts_both_option_forms() {
        let Command::Create(args) = parse("CREATE -c r --radius=12 -m 3.5 --posx 10 --velx=-4 --vely -2.5") else {
            panic!("expected create")
        };
        assert_eq!(args.color, "r");
        assert_eq!(args.radius, 12.0);
        assert_eq!(args.mass, Some(3.5));
        assert_eq!(args.posx, 10.0);
        assert_eq!(args.velx, -4.0);
        assert_eq!(args.vely, -2.5);
    }

    #[test]
    fn create_rejects_non_positive_radius() {
        assert!(matches!(Command::parse("create --radius 0"), Err(SimError::Usage(_))));
    }

    #[test]
    fn clear_forms() {
        assert_eq!(parse("clear"), Command::Clear(ClearArgs { all: false, id: None }));
        assert_eq!(parse("clear -a"), Command::Clear(ClearArgs { all: true, id: None }));
        assert_eq!(parse("clear --id 7"), Command::Clear(ClearArgs { all: false, id: Some(7) }));
        assert_eq!(parse("clear --id=9"), Command::Clear(ClearArgs { all: false, id: Some(9) }));
        assert!(Command::parse("clear --id").is_err());
        assert!(Command::parse("clear --id seven").is_err());
    }

    #[test]
    fn set_validates_values() {
        assert_eq!(
            parse("set --elasticity 1 --gravity OFF"),
            Command::Set(SetArgs { elasticity: Some(1), gravity: Some(Toggle::Off) })
        );
        assert_eq!(parse("set -e=0"), Command::Set(SetArgs { elasticity: Some(0), gravity: None }));
        assert!(Command::parse("set --elasticity 2").is_err());
        assert!(Command::parse("set --gravity maybe").is_err());
        assert!(Command::parse("set").is_err());
    }

    #[test]
    fn help_is_reported_as_usage() {
        match Command::parse("pause --help") {
            Err(SimError::Usage(err)) => assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp),
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn unknown_command_and_blank_line() {
        assert!(matches!(Command::parse("explode now"), Err(SimError::UnknownCommand(name)) if name == "explode"));
        assert!(Command::parse("   ").unwrap().is_none());
    }
}
