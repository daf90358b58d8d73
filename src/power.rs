//! Power state decoding and the on/off decision.

use std::fmt;

use serde_json::Value;

use crate::error::Error;

/// Power state reported by a `control/power` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// `state == 0`
    Off,
    /// `state == 1`
    On,
}

impl TryFrom<&Value> for PowerState {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value.as_u64() {
            Some(0) => Ok(Self::Off),
            Some(1) => Ok(Self::On),
            _ => Err(Error::invalid_response(format!("unexpected power state {value}"))),
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::On => "on",
        })
    }
}

/// Action posted to a chassis object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChassisAction {
    /// `action/powerOn`
    PowerOn,
    /// `action/powerOff`
    PowerOff,
}

impl ChassisAction {
    /// Name of the action endpoint under the chassis object.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::PowerOn => "powerOn",
            Self::PowerOff => "powerOff",
        }
    }
}

/// The action that moves `current` to `target`, or `None` if already there.
#[must_use]
pub fn action_for(current: PowerState, target: PowerState) -> Option<ChassisAction> {
    match (current, target) {
        (PowerState::Off, PowerState::On) => Some(ChassisAction::PowerOn),
        (PowerState::On, PowerState::Off) => Some(ChassisAction::PowerOff),
        _ => None,
    }
}
