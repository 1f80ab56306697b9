use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifier of a time slot from the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(u32);

impl SlotId {
    pub fn new(id: u32) -> SlotId {
        SlotId(id)
    }

    pub fn inner(&self) -> u32 {
        self.0
    }
}

impl From<u32> for SlotId {
    fn from(id: u32) -> Self {
        SlotId(id)
    }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(id: u64) -> SessionId {
        SessionId(id)
    }

    pub fn inner(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SessionId {
    fn from(id: u64) -> Self {
        SessionId(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    pub fn new(id: u64) -> BookingId {
        BookingId(id)
    }

    pub fn inner(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BookingId {
    fn from(id: u64) -> Self {
        BookingId(id)
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
