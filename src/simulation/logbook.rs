//! Periodic snapshot log of the body store.
//!
//! Each entry lists every stored body, live or not:
//!
//! ```text
//! ENTRY: #1
//! Circle 3:
//! Radius = 8.00
//! Mass = 154415.91
//! Position = (640.00, 360.00)
//! Velocity = (0.00, -12.50)
//! Circle 4:
//! is Dead.
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::simulation::states::Body;

pub struct SnapshotLog {
    sink: Box<dyn Write + Send>,
    entries: u64,
}

impl SnapshotLog {
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            entries: 0,
        }
    }

    /// Truncate or create the file at `path`
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Number of entries written so far
    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn record(&mut self, bodies: &[Body]) -> io::Result<()> {
        self.entries += 1;
        write_snapshot(&mut self.sink, self.entries, bodies)?;
        self.sink.flush()
    }
}

impl fmt::Debug for SnapshotLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotLog").field("entries", &self.entries).finish_non_exhaustive()
    }
}

pub fn write_snapshot<W: Write + ?Sized>(out: &mut W, entry: u64, bodies: &[Body]) -> io::Result<()> {
    writeln!(out, "ENTRY: #{entry}")?;
    for b in bodies {
        writeln!(out, "Circle {}:", b.id)?;
        if !b.alive {
            writeln!(out, "is Dead.")?;
            continue;
        }
        writeln!(out, "Radius = {:.2}", b.radius)?;
        writeln!(out, "Mass = {:.2}", b.m)?;
        writeln!(out, "Position = ({:.2}, {:.2})", b.x.x, b.x.y)?;
        writeln!(out, "Velocity = ({:.2}, {:.2})", b.v.x, b.v.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::color::Rgb24;
    use crate::simulation::states::{NVec2, PhysState};

    #[test]
    fn snapshot_format() {
        let live = Body::new(3, Rgb24::WHITE, 8.0, PhysState::new(2.5, NVec2::new(640.0, 360.0), NVec2::new(0.0, -12.5)));
        let mut dead = Body::new(4, Rgb24::RED, 8.0, PhysState::new(1.0, NVec2::zeros(), NVec2::zeros()));
        dead.alive = false;

        let mut out = Vec::new();
        write_snapshot(&mut out, 7, &[live, dead]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "ENTRY: #7\n\
             Circle 3:\n\
             Radius = 8.00\n\
             Mass = 2.50\n\
             Position = (640.00, 360.00)\n\
             Velocity = (0.00, -12.50)\n\
             Circle 4:\n\
             is Dead.\n"
        );
    }

    #[test]
    fn record_numbers_entries_from_one() {
        let body = Body::new(1, Rgb24::WHITE, 8.0, PhysState::new(1.0, NVec2::zeros(), NVec2::zeros()));
        let mut log = SnapshotLog::new(io::sink());
        assert_eq!(log.entries(), 0);
        log.record(std::slice::from_ref(&body)).unwrap();
        log.record(&[body]).unwrap();
        assert_eq!(log.entries(), 2);
    }
}
