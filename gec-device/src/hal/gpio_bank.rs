// Simulierte GPIO-Bank für den Host
//
// Modelliert den host-weiten GPIO-Namensraum: Anforderungen werden
// als exklusive Belegungen verbucht, Pegel und Richtung pro Leitung
// gespeichert. Handles teilen sich den Zustand, damit Belegungen wie
// auf echter Hardware prozessweit sichtbar sind.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gec_core::{GpioBank, GpioError, Level};
use log::{debug, warn};

/// Zustand einer einzelnen simulierten Leitung
#[derive(Debug, Clone, Copy)]
struct PinState {
    claimed_by: Option<&'static str>,
    is_output: bool,
    level: Level,
}

impl Default for PinState {
    fn default() -> Self {
        Self {
            claimed_by: None,
            is_output: false,
            level: Level::High,
        }
    }
}

/// Simulierte Host-GPIO-Bank
///
/// Klone teilen sich den Bank-Zustand; ein Klon dient dem Treiber als
/// Backend, ein weiterer kann von außen Pegel inspizieren oder
/// Leitungen vorbelegen (Konflikt-Szenarien).
#[derive(Debug, Clone, Default)]
pub struct SimBank {
    pins: Rc<RefCell<HashMap<u32, PinState>>>,
}

impl SimBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Belegt eine Leitung von außen, als hätte ein anderer Verbraucher
    /// sie bereits angefordert
    pub fn preclaim(&self, physical_id: u32, owner: &'static str) {
        let mut pins = self.pins.borrow_mut();
        pins.entry(physical_id).or_default().claimed_by = Some(owner);
    }

    /// Aktueller Pegel einer Leitung (None: nie berührt)
    pub fn level(&self, physical_id: u32) -> Option<Level> {
        self.pins.borrow().get(&physical_id).map(|pin| pin.level)
    }

    /// Ist die Leitung als Ausgang konfiguriert?
    pub fn is_output(&self, physical_id: u32) -> bool {
        self.pins
            .borrow()
            .get(&physical_id)
            .is_some_and(|pin| pin.is_output)
    }

    /// Anzahl aktuell belegter Leitungen
    pub fn claim_count(&self) -> usize {
        self.pins
            .borrow()
            .values()
            .filter(|pin| pin.claimed_by.is_some())
            .count()
    }
}

impl GpioBank for SimBank {
    fn request(&mut self, physical_id: u32, name: &'static str) -> Result<(), GpioError> {
        let mut pins = self.pins.borrow_mut();
        let pin = pins.entry(physical_id).or_default();
        match pin.claimed_by {
            Some(owner) => {
                warn!("gpio {physical_id} ({name}): request denied, claimed by {owner}");
                Err(GpioError::RequestFailed)
            }
            None => {
                pin.claimed_by = Some(name);
                debug!("gpio {physical_id} ({name}): requested");
                Ok(())
            }
        }
    }

    fn free(&mut self, physical_id: u32) {
        let mut pins = self.pins.borrow_mut();
        if let Some(pin) = pins.get_mut(&physical_id) {
            if pin.claimed_by.take().is_some() {
                debug!("gpio {physical_id}: freed");
            }
        }
    }

    fn set_direction_output(&mut self, physical_id: u32, initial: Level) -> Result<(), GpioError> {
        let mut pins = self.pins.borrow_mut();
        match pins.get_mut(&physical_id) {
            Some(pin) if pin.claimed_by.is_some() => {
                pin.is_output = true;
                pin.level = initial;
                Ok(())
            }
            _ => {
                warn!("gpio {physical_id}: direction change on unclaimed line");
                Err(GpioError::WriteFailed)
            }
        }
    }

    fn set_level(&mut self, physical_id: u32, level: Level) -> Result<(), GpioError> {
        let mut pins = self.pins.borrow_mut();
        match pins.get_mut(&physical_id) {
            Some(pin) if pin.claimed_by.is_some() && pin.is_output => {
                pin.level = level;
                debug!("gpio {physical_id}: level {level:?}");
                Ok(())
            }
            _ => {
                warn!("gpio {physical_id}: level write on unclaimed or input line");
                Err(GpioError::WriteFailed)
            }
        }
    }
}
