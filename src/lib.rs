//! Coordinate field validation and the "move" gate it drives.

pub mod file_input;
pub mod gate;
pub mod types;
pub mod validator;

pub use gate::{FieldEvent, FieldState, MapRegion, MoveGate};
pub use types::{Axis, InputError, RangeError};
pub use validator::{CoordinateFieldValidator, ValidationRange};
