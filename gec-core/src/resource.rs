//! Resource Manager - Leitungs-Gruppe mit Alles-oder-Nichts-Semantik
//!
//! Ersetzt die goto-basierte Aufräum-Logik des originalen Treibers
//! durch einen Guard-Typ: Freigabe auf jedem Ausstiegspfad über Drop.

use crate::registry::LineTable;
use crate::traits::{GpioBank, GpioError};
use crate::types::{AcquisitionState, Level};

/// Fehler-Typ für die Gruppen-Anforderung
///
/// Nennt die Leitung, an der die Anforderung gescheitert ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcquireError {
    /// Logischer Index der gescheiterten Leitung
    pub index: usize,
    /// Name der gescheiterten Leitung
    pub name: &'static str,
}

/// Guard über alle exklusiv angeforderten Leitungen
///
/// Existiert nur, wenn `acquire_all` vollständig erfolgreich war -
/// damit ist strukturell garantiert, dass Dispatch nie eine nicht
/// angeforderte Leitung trifft. Besitzt Bank und Tabelle als
/// expliziten Kontext (keine globalen Singletons).
#[derive(Debug)]
pub struct AcquiredLines<G: GpioBank> {
    bank: G,
    table: LineTable,
    state: AcquisitionState,
}

impl<G: GpioBank> AcquiredLines<G> {
    /// Fordert alle Leitungen der Tabelle in Index-Reihenfolge an
    ///
    /// Scheitert eine Anforderung, werden vor der Fehler-Rückgabe
    /// sämtliche Tabellen-Einträge freigegeben - auch die nie
    /// angeforderten, wie es der originale init-Pfad tut. Keine
    /// Leitung bleibt halb belegt.
    pub fn acquire_all(mut bank: G, table: LineTable) -> Result<Self, AcquireError> {
        for (index, line) in table.entries().iter().enumerate() {
            if bank.request(line.physical_id, line.name).is_err() {
                // Rollback: komplette Tabelle freigeben (free ist idempotent)
                for line in table.entries() {
                    bank.free(line.physical_id);
                }
                return Err(AcquireError {
                    index,
                    name: line.name,
                });
            }
        }
        Ok(Self {
            bank,
            table,
            state: AcquisitionState::Requested,
        })
    }

    /// Konfiguriert alle Leitungen als Ausgang mit Ruhe-Pegel
    ///
    /// Wird bei jedem Session-open aufgerufen; wiederholte
    /// Konfiguration ist ausdrücklich erlaubt und kein Fehler.
    pub fn configure_as_output(&mut self, idle: Level) -> Result<(), GpioError> {
        for line in self.table.entries() {
            self.bank.set_direction_output(line.physical_id, idle)?;
        }
        self.state = AcquisitionState::ConfiguredOutput;
        Ok(())
    }

    /// Gibt alle Leitungen frei
    ///
    /// Idempotent; sicher auch nach teilweiser oder fehlender
    /// Konfiguration.
    pub fn release_all(&mut self) {
        for line in self.table.entries() {
            self.bank.free(line.physical_id);
        }
        self.state = AcquisitionState::Unrequested;
    }

    /// Setzt den Pegel einer physischen Leitung
    pub fn set_level(&mut self, physical_id: u32, level: Level) -> Result<(), GpioError> {
        self.bank.set_level(physical_id, level)
    }

    /// Zugriff auf die Leitungstabelle
    pub fn table(&self) -> &LineTable {
        &self.table
    }

    /// Aktueller Batch-Zustand der Gruppe
    pub fn state(&self) -> AcquisitionState {
        self.state
    }
}

impl<G: GpioBank> Drop for AcquiredLines<G> {
    fn drop(&mut self) {
        self.release_all();
    }
}
