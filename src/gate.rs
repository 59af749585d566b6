//! Enable/disable state for the "move" action.

use crate::types::{Axis, RangeError};
use crate::validator::CoordinateFieldValidator;

pub const DEFAULT_SPAN: f64 = 5.0;

/// Center and zoom span passed to the map's recenter call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Raw text of one input field. `None` means the field has no text object at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    text: Option<String>,
}

impl FieldState {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn clear(&mut self) {
        self.text = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    Edited(Axis, String),
    Cleared(Axis),
    EndEditing(Axis),
}

#[derive(Debug, Clone)]
pub struct MoveGate {
    latitude: FieldState,
    longitude: FieldState,
    latitude_validator: CoordinateFieldValidator,
    longitude_validator: CoordinateFieldValidator,
    latitude_delta: f64,
    longitude_delta: f64,
    enabled: bool,
}

impl Default for MoveGate {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGate {
    pub fn new() -> Self {
        Self {
            latitude: FieldState::default(),
            longitude: FieldState::default(),
            latitude_validator: CoordinateFieldValidator::latitude(),
            longitude_validator: CoordinateFieldValidator::longitude(),
            latitude_delta: DEFAULT_SPAN,
            longitude_delta: DEFAULT_SPAN,
            enabled: false,
        }
    }

    pub fn with_span(latitude_delta: f64, longitude_delta: f64) -> Result<Self, RangeError> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !valid(latitude_delta) || !valid(longitude_delta) {
            return Err(RangeError::InvalidSpan(latitude_delta, longitude_delta));
        }
        Ok(Self {
            latitude_delta,
            longitude_delta,
            ..Self::new()
        })
    }

    /// Applies a field event and returns whether the move action is now enabled.
    ///
    /// Every event re-validates both fields; editing itself is never refused.
    pub fn apply(&mut self, event: FieldEvent) -> bool {
        match event {
            FieldEvent::Edited(axis, text) => self.field_mut(axis).set(text),
            FieldEvent::Cleared(axis) => self.field_mut(axis).clear(),
            FieldEvent::EndEditing(_) => {}
        }
        self.revalidate()
    }

    pub fn set_text(&mut self, axis: Axis, text: Option<&str>) -> bool {
        match text {
            Some(t) => self.field_mut(axis).set(t),
            None => self.field_mut(axis).clear(),
        }
        self.revalidate()
    }

    pub fn text(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Latitude => self.latitude.text(),
            Axis::Longitude => self.longitude.text(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn field_validity(&self) -> (bool, bool) {
        (
            self.latitude_validator.validate(self.latitude.text()),
            self.longitude_validator.validate(self.longitude.text()),
        )
    }

    /// The region a move would recenter on, if the action is enabled.
    pub fn move_target(&self) -> Option<MapRegion> {
        if !self.enabled {
            return None;
        }
        let latitude = self.latitude_validator.parse(self.latitude.text())?;
        let longitude = self.longitude_validator.parse(self.longitude.text())?;
        Some(MapRegion {
            latitude,
            longitude,
            latitude_delta: self.latitude_delta,
            longitude_delta: self.longitude_delta,
        })
    }

    fn field_mut(&mut self, axis: Axis) -> &mut FieldState {
        match axis {
            Axis::Latitude => &mut self.latitude,
            Axis::Longitude => &mut self.longitude,
        }
    }

    fn revalidate(&mut self) -> bool {
        let (lat_ok, lon_ok) = self.field_validity();
        self.enabled = lat_ok && lon_ok;
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_with(lat: &str, lon: &str) -> MoveGate {
        let mut gate = MoveGate::new();
        gate.set_text(Axis::Latitude, Some(lat));
        gate.set_text(Axis::Longitude, Some(lon));
        gate
    }

    #[test]
    fn test_starts_disabled() {
        let gate = MoveGate::new();
        assert!(!gate.is_enabled());
        assert_eq!(gate.field_validity(), (false, false));
        assert_eq!(gate.move_target(), None);
    }

    #[test]
    fn test_longitude_out_of_range_disables() {
        let gate = gate_with("45", "200");
        assert!(!gate.is_enabled());
        assert_eq!(gate.field_validity(), (true, false));
    }

    #[test]
    fn test_both_valid_enables() {
        let gate = gate_with("45", "120");
        assert!(gate.is_enabled());
        assert_eq!(
            gate.move_target(),
            Some(MapRegion {
                latitude: 45.0,
                longitude: 120.0,
                latitude_delta: 5.0,
                longitude_delta: 5.0,
            })
        );
    }

    #[test]
    fn test_latitude_uses_latitude_limit() {
        // 120 is a valid longitude but not a valid latitude
        let gate = gate_with("120", "45");
        assert!(!gate.is_enabled());
        assert_eq!(gate.field_validity(), (false, true));
    }

    #[test]
    fn test_events_revalidate() {
        let mut gate = MoveGate::new();
        assert!(!gate.apply(FieldEvent::Edited(Axis::Latitude, "10".into())));
        assert!(gate.apply(FieldEvent::Edited(Axis::Longitude, "-20".into())));
        assert!(gate.apply(FieldEvent::EndEditing(Axis::Longitude)));
        assert!(!gate.apply(FieldEvent::Cleared(Axis::Latitude)));
        assert_eq!(gate.text(Axis::Latitude), None);
        assert_eq!(gate.move_target(), None);
    }

    #[test]
    fn test_invalid_edit_keeps_text() {
        let mut gate = MoveGate::new();
        gate.apply(FieldEvent::Edited(Axis::Latitude, "abc".into()));
        assert_eq!(gate.text(Axis::Latitude), Some("abc"));
    }

    #[test]
    fn test_custom_span() {
        let mut gate = MoveGate::with_span(0.5, 1.0).unwrap();
        gate.set_text(Axis::Latitude, Some("-33.9"));
        gate.set_text(Axis::Longitude, Some("151.2"));
        let region = gate.move_target().unwrap();
        assert_eq!(region.latitude_delta, 0.5);
        assert_eq!(region.longitude_delta, 1.0);
        assert_eq!(region.latitude, -33.9);
    }

    #[test]
    fn test_invalid_span_rejected() {
        assert!(MoveGate::with_span(0.0, 5.0).is_err());
        assert!(MoveGate::with_span(5.0, f64::NAN).is_err());
        assert!(MoveGate::with_span(-1.0, -1.0).is_err());
    }
}
