//! Logisches LED-Device: Kommando-Dispatcher und Session-Schicht
//!
//! Entspricht dem fops-Teil des originalen Treibers (open, read,
//! write, release, unlocked_ioctl) - hier als explizites Objekt statt
//! statischer file_operations.

use heapless::Vec;

use crate::logic::{ARG_INDEX_OFFSET, DispatchError, decode_command};
use crate::resource::AcquiredLines;
use crate::traits::{GpioBank, GpioError, TransferError, UserBoundary};
use crate::types::IDLE_LEVEL;

/// Kapazität des Staging-Puffers für read/write (Bytes)
pub const STAGING_CAPACITY: usize = 64;

/// Fester Payload, den read an den Aufrufer liefert
const READ_PAYLOAD: &[u8] = b"gec6818 led driver: 4 lines ready\n";

/// Das LED-Device
///
/// Wird ausschließlich aus einem [`AcquiredLines`]-Guard konstruiert.
/// Damit ist der Dispatch-Einstieg erst erreichbar, wenn alle
/// Leitungen erfolgreich angefordert wurden - die Reihenfolge-Garantie
/// steckt im Typsystem, nicht in einem Laufzeit-Lock.
#[derive(Debug)]
pub struct LedDevice<G: GpioBank, U: UserBoundary> {
    lines: AcquiredLines<G>,
    boundary: U,
    /// Zuletzt per write übertragene Nachricht (rein informativ,
    /// write steuert keine LED)
    note: Vec<u8, STAGING_CAPACITY>,
}

impl<G: GpioBank, U: UserBoundary> LedDevice<G, U> {
    /// Erstellt das Device über bereits angeforderten Leitungen
    pub fn new(lines: AcquiredLines<G>, boundary: U) -> Self {
        Self {
            lines,
            boundary,
            note: Vec::new(),
        }
    }

    /// Öffnet eine Session
    ///
    /// Konfiguriert bei jedem open alle Leitungen als Ausgang mit
    /// Ruhe-Pegel (LED aus). Mehrfaches Öffnen ist erlaubt, da die
    /// Leitungen dem Modul gehören, nicht der Session.
    pub fn open(&mut self) -> Result<Session<'_, G, U>, GpioError> {
        self.lines.configure_as_output(IDLE_LEVEL)?;
        Ok(Session { device: self })
    }

    /// Führt ein (Kommando, Argument)-Paar aus
    ///
    /// Dekodiert das Paar, löst den logischen Index über die Registry
    /// auf und setzt genau einen Leitungs-Pegel. Blockiert nie.
    ///
    /// # Fehlerbehandlung
    /// - `UnsupportedCommand` bei unbekanntem Kommando-Code
    /// - `InvalidArgument` wenn der Index außerhalb der Tabelle liegt
    /// - `Gpio` wenn das Pegel-Schreiben fehlschlägt
    pub fn dispatch(&mut self, code: u32, raw_arg: u64) -> Result<(), DispatchError> {
        let command = decode_command(code, raw_arg)?;
        let physical_id = self
            .lines
            .table()
            .resolve(command.index())
            .map_err(|_| DispatchError::InvalidArgument(command.index() + ARG_INDEX_OFFSET))?
            .physical_id;
        self.lines.set_level(physical_id, command.level())?;
        Ok(())
    }

    /// Zuletzt per write übertragene Nachricht
    pub fn last_note(&self) -> &[u8] {
        &self.note
    }

    /// Zugriff auf den Leitungs-Guard (Zustand, Tabelle)
    pub fn lines(&self) -> &AcquiredLines<G> {
        &self.lines
    }
}

/// Eine offene Session auf dem LED-Device
///
/// Begrenzt die Lebensdauer der Byte-Transfer-Berechtigung; hält
/// selbst keine Hardware-Ressourcen.
#[derive(Debug)]
pub struct Session<'a, G: GpioBank, U: UserBoundary> {
    device: &'a mut LedDevice<G, U>,
}

impl<G: GpioBank, U: UserBoundary> Session<'_, G, U> {
    /// Überträgt Bytes vom Aufrufer in den Treiber
    ///
    /// Die Bytes sind rein informativ und lösen keine Hardware-Aktion
    /// aus; LED-Steuerung läuft ausschließlich über [`dispatch`].
    ///
    /// # Fehlerbehandlung
    /// `BufferTooLarge` wenn mehr als [`STAGING_CAPACITY`] Bytes
    /// angefordert werden; dann wird kein einziges Byte kopiert.
    ///
    /// [`dispatch`]: Session::dispatch
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, TransferError> {
        if buf.len() > STAGING_CAPACITY {
            return Err(TransferError::BufferTooLarge {
                requested: buf.len(),
                capacity: STAGING_CAPACITY,
            });
        }
        let mut staging = [0u8; STAGING_CAPACITY];
        let copied = self
            .device
            .boundary
            .copy_in(&mut staging[..buf.len()], buf)?;
        // copied <= STAGING_CAPACITY, from_slice kann hier nicht scheitern
        self.device.note = Vec::from_slice(&staging[..copied]).map_err(|_| TransferError::Fault)?;
        Ok(copied)
    }

    /// Liefert den festen Informations-Payload an den Aufrufer
    ///
    /// Der Payload wird auf die angeforderte Länge gekürzt bzw. mit
    /// Null-Bytes aufgefüllt; zwei Aufrufe mit gleicher Länge liefern
    /// identische Bytes. Gleiche Kapazitätsregel wie bei write.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransferError> {
        if buf.len() > STAGING_CAPACITY {
            return Err(TransferError::BufferTooLarge {
                requested: buf.len(),
                capacity: STAGING_CAPACITY,
            });
        }
        let mut staging = [0u8; STAGING_CAPACITY];
        staging[..READ_PAYLOAD.len()].copy_from_slice(READ_PAYLOAD);
        let len = buf.len();
        self.device.boundary.copy_out(buf, &staging[..len])
    }

    /// Führt ein Kommando auf dem offenen Device aus
    pub fn dispatch(&mut self, code: u32, raw_arg: u64) -> Result<(), DispatchError> {
        self.device.dispatch(code, raw_arg)
    }

    /// Beendet die Session
    ///
    /// Gibt keine Hardware frei - die Leitungen bleiben für die
    /// Lebensdauer des Moduls angefordert.
    pub fn close(self) {}
}
