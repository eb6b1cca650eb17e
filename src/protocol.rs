//! Line-based reader for the referee's input stream.

use std::io::BufRead;
use std::str::FromStr;

use thiserror::Error;

use crate::observation::{
    CreatureInfo, DroneReport, InitialObservation, RadarBlip, ScanReport, TurnObservation,
    VisibleCreature,
};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input ended while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("Expected {expected} fields for {what}, got {found}: {line:?}")]
    FieldCount {
        what: &'static str,
        expected: usize,
        found: usize,
        line: String,
    },
    #[error("Invalid number in {what}: {value:?}")]
    BadNumber { what: &'static str, value: String },
}

pub struct ProtocolReader<R> {
    input: R,
    buf: String,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: String::new(),
        }
    }

    pub fn read_initial(&mut self) -> Result<InitialObservation, ProtocolError> {
        let count: usize = self.read_value("creature count")?;
        let mut creatures = Vec::with_capacity(count);
        for _ in 0..count {
            let f = self.read_fields("creature", 3)?;
            creatures.push(CreatureInfo {
                id: parse("creature id", &f[0])?,
                color: parse("creature color", &f[1])?,
                kind: parse("creature type", &f[2])?,
            });
        }
        Ok(InitialObservation { creatures })
    }

    /// Reads one turn. `Ok(None)` means the stream closed cleanly between turns.
    pub fn read_turn(&mut self) -> Result<Option<TurnObservation>, ProtocolError> {
        let Some(first) = self.next_line()? else {
            return Ok(None);
        };
        let my_score = parse("my score", &first)?;
        let foe_score = self.read_value("foe score")?;
        let my_saved = self.read_ids("my saved scan")?;
        let foe_saved = self.read_ids("foe saved scan")?;
        let my_drones = self.read_drones("my drone")?;
        let foe_drones = self.read_drones("foe drone")?;

        let count: usize = self.read_value("scan count")?;
        let mut scans = Vec::with_capacity(count);
        for _ in 0..count {
            let f = self.read_fields("drone scan", 2)?;
            scans.push(ScanReport {
                drone_id: parse("drone id", &f[0])?,
                creature_id: parse("creature id", &f[1])?,
            });
        }

        let count: usize = self.read_value("visible creature count")?;
        let mut visible = Vec::with_capacity(count);
        for _ in 0..count {
            let f = self.read_fields("visible creature", 5)?;
            visible.push(VisibleCreature {
                id: parse("creature id", &f[0])?,
                x: parse("creature x", &f[1])?,
                y: parse("creature y", &f[2])?,
                vx: parse("creature vx", &f[3])?,
                vy: parse("creature vy", &f[4])?,
            });
        }

        let count: usize = self.read_value("radar blip count")?;
        let mut blips = Vec::with_capacity(count);
        for _ in 0..count {
            let f = self.read_fields("radar blip", 3)?;
            blips.push(RadarBlip {
                drone_id: parse("drone id", &f[0])?,
                creature_id: parse("creature id", &f[1])?,
                direction: f[2].clone(),
            });
        }

        Ok(Some(TurnObservation {
            my_score,
            foe_score,
            my_saved,
            foe_saved,
            my_drones,
            foe_drones,
            scans,
            visible,
            blips,
        }))
    }

    fn read_ids(&mut self, what: &'static str) -> Result<Vec<u32>, ProtocolError> {
        let count: usize = self.read_value(what)?;
        (0..count).map(|_| self.read_value(what)).collect()
    }

    fn read_drones(&mut self, what: &'static str) -> Result<Vec<DroneReport>, ProtocolError> {
        let count: usize = self.read_value(what)?;
        let mut drones = Vec::with_capacity(count);
        for _ in 0..count {
            let f = self.read_fields(what, 5)?;
            drones.push(DroneReport {
                id: parse("drone id", &f[0])?,
                x: parse("drone x", &f[1])?,
                y: parse("drone y", &f[2])?,
                emergency: parse::<i32>("drone emergency", &f[3])? != 0,
                battery: parse("drone battery", &f[4])?,
            });
        }
        Ok(drones)
    }

    fn read_value<T: FromStr>(&mut self, what: &'static str) -> Result<T, ProtocolError> {
        let line = self
            .next_line()?
            .ok_or(ProtocolError::UnexpectedEof(what))?;
        parse(what, &line)
    }

    fn read_fields(
        &mut self,
        what: &'static str,
        expected: usize,
    ) -> Result<Vec<String>, ProtocolError> {
        let line = self
            .next_line()?
            .ok_or(ProtocolError::UnexpectedEof(what))?;
        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if fields.len() != expected {
            return Err(ProtocolError::FieldCount {
                what,
                expected,
                found: fields.len(),
                line,
            });
        }
        Ok(fields)
    }

    // Skips blank lines.
    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        loop {
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            let trimmed = self.buf.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }
}

fn parse<T: FromStr>(what: &'static str, raw: &str) -> Result<T, ProtocolError> {
    raw.trim().parse().map_err(|_| ProtocolError::BadNumber {
        what,
        value: raw.to_string(),
    })
}
