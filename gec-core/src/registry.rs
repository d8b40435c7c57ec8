//! Line Registry - Statische Leitungstabelle
//!
//! Read-only Projektion der zur Build-Zeit festgelegten Zuordnung
//! logischer Index → physische Leitung.

use crate::types::LineDescriptor;

/// Anzahl der verwalteten Leitungen (fix, wird nie zur Laufzeit geändert)
pub const LINE_COUNT: usize = 4;

/// Maximale Länge eines Leitungsnamens in Bytes
pub const MAX_NAME_LEN: usize = 16;

/// Fehler-Typ für Registry-Abfragen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// Logischer Index liegt außerhalb von [0, LINE_COUNT)
    OutOfRange(u64),
}

/// Geordnete Tabelle mit genau [`LINE_COUNT`] Einträgen
///
/// Die Tabelle ist nach der Konstruktion unveränderlich. Beide
/// Invarianten (eindeutige physische IDs, Namenslänge ≤ 16 Bytes)
/// werden in `new` geprüft - bei const-Konstruktion also schon
/// zur Compile-Zeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTable {
    entries: [LineDescriptor; LINE_COUNT],
}

impl LineTable {
    /// Erstellt eine validierte Leitungstabelle
    ///
    /// # Panics
    /// Bei doppelten physischen IDs oder zu langen Namen.
    pub const fn new(entries: [LineDescriptor; LINE_COUNT]) -> Self {
        let mut i = 0;
        while i < LINE_COUNT {
            assert!(
                entries[i].name.len() <= MAX_NAME_LEN,
                "line name exceeds MAX_NAME_LEN"
            );
            let mut j = i + 1;
            while j < LINE_COUNT {
                assert!(
                    entries[i].physical_id != entries[j].physical_id,
                    "duplicate physical line id"
                );
                j += 1;
            }
            i += 1;
        }
        Self { entries }
    }

    /// Löst einen logischen Index zur Leitungsbeschreibung auf
    ///
    /// Pure Funktion ohne Seiteneffekte; total über [0, LINE_COUNT).
    pub fn resolve(&self, index: u64) -> Result<&LineDescriptor, RegistryError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i))
            .ok_or(RegistryError::OutOfRange(index))
    }

    /// Alle Einträge in Index-Reihenfolge
    pub fn entries(&self) -> &[LineDescriptor; LINE_COUNT] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: LineTable = LineTable::new([
        LineDescriptor { physical_id: 141, name: "gpioe13" },
        LineDescriptor { physical_id: 71, name: "gpioc7" },
        LineDescriptor { physical_id: 72, name: "gpioc8" },
        LineDescriptor { physical_id: 81, name: "gpioc17" },
    ]);

    #[test]
    fn test_resolve_all_valid_indices() {
        assert_eq!(TABLE.resolve(0).unwrap().name, "gpioe13");
        assert_eq!(TABLE.resolve(1).unwrap().name, "gpioc7");
        assert_eq!(TABLE.resolve(2).unwrap().name, "gpioc8");
        assert_eq!(TABLE.resolve(3).unwrap().name, "gpioc17");
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert_eq!(TABLE.resolve(4), Err(RegistryError::OutOfRange(4)));
        assert_eq!(
            TABLE.resolve(u64::MAX),
            Err(RegistryError::OutOfRange(u64::MAX))
        );
    }

    #[test]
    fn test_resolve_is_pure() {
        // Zwei Abfragen liefern identische Beschreibungen
        assert_eq!(TABLE.resolve(2), TABLE.resolve(2));
    }

    #[test]
    fn test_entries_order_matches_indices() {
        for (i, entry) in TABLE.entries().iter().enumerate() {
            assert_eq!(TABLE.resolve(i as u64).unwrap(), entry);
        }
    }
}
