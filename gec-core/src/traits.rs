//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware- und
//! Boundary-Zugriff ohne konkrete Implementierung.

use crate::types::Level;

/// Fehler-Typ für GPIO-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Die Leitung ist bereits anderweitig belegt
    RequestFailed,
    /// Hardware-Zugriff beim Schreiben fehlgeschlagen
    WriteFailed,
}

/// Trait für den Zugriff auf eine GPIO-Bank
///
/// Abstrahiert das Anfordern, Freigeben und Schreiben physischer
/// Leitungen.
///
/// # Implementierungen
/// - **Production:** SimBank (simulierte Host-GPIO-Bank in gec-device)
/// - **Testing:** MockGpioBank (in-memory Mock in gec-tests)
pub trait GpioBank {
    /// Fordert eine Leitung exklusiv für diesen Treiber an
    ///
    /// # Fehlerbehandlung
    /// Gibt `GpioError::RequestFailed` zurück wenn die Leitung schon
    /// belegt ist.
    fn request(&mut self, physical_id: u32, name: &'static str) -> Result<(), GpioError>;

    /// Gibt eine Leitung wieder frei
    ///
    /// Muss idempotent sein: das Freigeben einer nie angeforderten
    /// Leitung ist ein No-op.
    fn free(&mut self, physical_id: u32);

    /// Konfiguriert eine Leitung als Ausgang mit Start-Pegel
    fn set_direction_output(&mut self, physical_id: u32, initial: Level) -> Result<(), GpioError>;

    /// Setzt den Ausgangs-Pegel einer Leitung
    fn set_level(&mut self, physical_id: u32, level: Level) -> Result<(), GpioError>;
}

/// Fehler-Typ für Byte-Transfers über die Prozess-Grenze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError {
    /// Angeforderte Länge übersteigt die Staging-Kapazität
    BufferTooLarge { requested: usize, capacity: usize },
    /// Der Kopiervorgang selbst ist fehlgeschlagen
    Fault,
}

/// Trait für den Byte-Transfer über die Prozess-Grenze
///
/// Ersetzt die rohen copy_from_user/copy_to_user-Aufrufe durch eine
/// begrenzte Kopie mit explizitem Resultat. `dst` und `src` haben
/// stets dieselbe Länge; bei Erfolg wird die Anzahl kopierter Bytes
/// zurückgegeben.
///
/// # Implementierungen
/// - **Production:** HostBoundary (direkte Slice-Kopie in gec-device)
/// - **Testing:** FlakyBoundary (Fehler-Injektion in gec-tests)
pub trait UserBoundary {
    /// Kopiert Bytes vom Aufrufer in den Treiber (write-Pfad)
    fn copy_in(&mut self, dst: &mut [u8], src: &[u8]) -> Result<usize, TransferError>;

    /// Kopiert Bytes vom Treiber zum Aufrufer (read-Pfad)
    fn copy_out(&mut self, dst: &mut [u8], src: &[u8]) -> Result<usize, TransferError>;
}
