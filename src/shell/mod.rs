//! Command shell: reads lines from a command source and mutates the engine
//!
//! Each command is parsed first, then applied with the engine lock held for
//! the whole command, output included, so a frame never sees half of it.

pub mod commands;

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::error::SimError;
use crate::simulation::color::Rgb24;
use crate::simulation::engine::{Engine, World};
use crate::simulation::modes::Modes;
use crate::simulation::params::disc_mass;
use crate::simulation::states::{NVec2, PhysState};
use commands::{ClearArgs, Command, CreateArgs, SetArgs, Toggle, SUPPORTED};

#[derive(Debug, Clone)]
pub struct Shell {
    engine: Arc<Engine>,
}

impl Shell {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Start the input thread on stdin. It runs until the process exits.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new().name("input".into()).spawn(move || {
            let stdin = io::stdin();
            if let Err(err) = self.run(stdin.lock(), io::stdout()) {
                warn!(error = %err, "command shell stopped");
            }
        })
    }

    /// Read commands until the source is exhausted. Bytes that are not UTF-8
    /// are replaced, so a garbled line is reported like any other bad input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> io::Result<()> {
        {
            let _world = self.engine.lock();
            writeln!(out, "Supported Commands: {SUPPORTED}")?;
            write!(out, "$ ")?;
            out.flush()?;
        }

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&raw);
            self.execute(line.trim_end_matches(['\n', '\r']), &mut out)?;

            let _world = self.engine.lock();
            write!(out, "$ ")?;
            out.flush()?;
        }
        Ok(())
    }

    /// Parse and apply one line. Command errors become diagnostics on `out`;
    /// only failures to write `out` are returned.
    pub fn execute<W: Write>(&self, line: &str, out: &mut W) -> io::Result<()> {
        let parsed = Command::parse(line);
        let mut world = self.engine.lock();

        match parsed {
            Ok(None) => {}
            Ok(Some(command)) => {
                debug!(?command, "shell command");
                apply(&mut world, command, out)?;
            }
            Err(SimError::Usage(err)) => write!(out, "{}", err.render())?,
            Err(err) => writeln!(out, "{err}")?,
        }
        out.flush()
    }
}

fn apply<W: Write>(world: &mut World, command: Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::Create(args) => create(world, args, out),
        Command::Clear(args) => clear(world, args, out),
        Command::Set(args) => {
            set(world, args);
            Ok(())
        }
        Command::Pause(_) => {
            world.set_mode(Modes::PAUSED, true);
            Ok(())
        }
        Command::Resume(_) => {
            world.set_mode(Modes::PAUSED, false);
            Ok(())
        }
    }
}

fn create<W: Write>(world: &mut World, args: CreateArgs, out: &mut W) -> io::Result<()> {
    let letter = args.color.chars().next().unwrap_or('w');
    let color = match Rgb24::from_letter(letter) {
        Some(color) => color,
        None => {
            writeln!(out, "create: color '{letter}' is invalid, defaulting to white")?;
            writeln!(out, "try 'create --help' for more information")?;
            Rgb24::WHITE
        }
    };

    let mass = args.mass.unwrap_or_else(|| disc_mass(args.radius));
    let phys = PhysState::new(mass, NVec2::new(args.posx, args.posy), NVec2::new(args.velx, args.vely));

    match world.spawn(color, args.radius, phys) {
        Ok(id) => {
            debug!(id, "created body from shell");
            Ok(())
        }
        Err(err) => writeln!(out, "create: {err}"),
    }
}

fn clear<W: Write>(world: &mut World, args: ClearArgs, out: &mut W) -> io::Result<()> {
    match args.id {
        Some(id) if !args.all => {
            if !world.kill(id) {
                writeln!(out, "clear: could not find circle with id: {id}")?;
            }
        }
        _ => world.clear_all(),
    }
    Ok(())
}

fn set(world: &mut World, args: SetArgs) {
    if let Some(elasticity) = args.elasticity {
        world.set_mode(Modes::ELASTIC_COLLISION, elasticity == 1);
    }
    if let Some(gravity) = args.gravity {
        world.set_mode(Modes::ENABLE_GRAVITY, gravity == Toggle::On);
    }
}
