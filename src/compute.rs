//! Runs raw input pairs through a move gate.

use crate::data::PairStream;
use fieldcheck::{Axis, MapRegion, MoveGate};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub line: usize,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub latitude_valid: bool,
    pub longitude_valid: bool,
    pub enabled: bool,
    pub region: Option<MapRegion>,
}

pub fn check_stream(
    pairs: PairStream,
    mut gate: MoveGate,
) -> Box<dyn Iterator<Item = Result<CheckResult, String>>> {
    Box::new(pairs.map(move |pair| {
        let pair = pair.map_err(|e| e.to_string())?;
        gate.set_text(Axis::Latitude, pair.latitude.as_deref());
        gate.set_text(Axis::Longitude, pair.longitude.as_deref());
        let (latitude_valid, longitude_valid) = gate.field_validity();
        Ok(CheckResult {
            line: pair.line,
            latitude: pair.latitude,
            longitude: pair.longitude,
            latitude_valid,
            longitude_valid,
            enabled: gate.is_enabled(),
            region: gate.move_target(),
        })
    }))
}
