// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use gec_core::{LineDescriptor, LineTable};

// ============================================================================
// GPIO-Namensraum
// ============================================================================

/// Basis-Offsets der GPIO-Bänke im Namensraum des Hosts
/// (32 Leitungen pro Bank, Bank A beginnt bei 0)
pub const PAD_GPIO_C: u32 = 64;
pub const PAD_GPIO_E: u32 = 128;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// Geräte-Name für Log-Ausgaben
pub const DEVICE_NAME: &str = "LEDs";

/// Die vier verwalteten LED-Leitungen in logischer Index-Reihenfolge
///
/// Zuordnung ist zur Build-Zeit fix; die Tabellen-Invarianten
/// (eindeutige IDs, Namenslänge) prüft LineTable::new beim
/// Konstanten-Auswerten.
pub const LINE_TABLE: LineTable = LineTable::new([
    LineDescriptor { physical_id: PAD_GPIO_E + 13, name: "gpioe13" },
    LineDescriptor { physical_id: PAD_GPIO_C + 7, name: "gpioc7" },
    LineDescriptor { physical_id: PAD_GPIO_C + 8, name: "gpioc8" },
    LineDescriptor { physical_id: PAD_GPIO_C + 17, name: "gpioc17" },
]);
