//! Core Types für den LED-Treiber
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Logik-Pegel einer physischen Leitung
///
/// Die LEDs sind active-low verdrahtet: Logik 0 schaltet die LED ein.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logik 0
    Low,
    /// Logik 1
    High,
}

/// Pegel für den eingeschalteten Zustand (active-low)
pub const ACTIVE_LEVEL: Level = Level::Low;

/// Ruhe-Pegel: LED aus
pub const IDLE_LEVEL: Level = Level::High;

/// Beschreibung einer physischen Leitung
///
/// `physical_id` ist das Handle im GPIO-Namensraum des Hosts,
/// `name` der Anzeigename (maximal 16 Bytes, siehe Registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineDescriptor {
    pub physical_id: u32,
    pub name: &'static str,
}

/// Zustand der Leitungs-Gruppe
///
/// Alle 4 Leitungen wechseln den Zustand gemeinsam als Batch,
/// nie einzeln.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquisitionState {
    /// Keine Leitung ist angefordert
    Unrequested,
    /// Alle Leitungen sind exklusiv angefordert
    Requested,
    /// Alle Leitungen sind als Ausgang konfiguriert (nach erstem open)
    ConfiguredOutput,
}

/// Dekodiertes LED-Kommando
///
/// Der Payload ist der logische Index (Roh-Argument minus Offset).
/// Die Bereichsprüfung übernimmt erst die Registry beim Dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedCommand {
    /// LED einschalten (Leitung auf Logik 0)
    TurnOn(u64),
    /// LED ausschalten (Leitung auf Logik 1)
    TurnOff(u64),
}

impl LedCommand {
    /// Logischer Index des Kommandos
    pub fn index(self) -> u64 {
        match self {
            LedCommand::TurnOn(index) | LedCommand::TurnOff(index) => index,
        }
    }

    /// Ziel-Pegel des Kommandos (active-low)
    pub fn level(self) -> Level {
        match self {
            LedCommand::TurnOn(_) => ACTIVE_LEVEL,
            LedCommand::TurnOff(_) => IDLE_LEVEL,
        }
    }
}
