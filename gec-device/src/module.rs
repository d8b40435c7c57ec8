// Modul-Lifecycle: Installieren und Entfernen des LED-Treibers
//
// Entspricht module_init/module_exit des originalen Treibers: erst
// alle Leitungen anfordern, nur bei vollem Erfolg das Device (die
// Schnittstelle) registrieren. Scheitert die Anforderung, bleibt
// nichts belegt und kein Device existiert.

use gec_core::{AcquireError, AcquiredLines, LedDevice};
use log::{error, info};

use crate::config::{DEVICE_NAME, LINE_TABLE};
use crate::hal::{HostBoundary, SimBank};

/// Das installierte LED-Modul
///
/// Besitzt das Device und damit transitiv alle Leitungen. Beim Drop
/// werden die Leitungen über den Guard bedingungslos freigegeben.
#[derive(Debug)]
pub struct LedModule {
    device: LedDevice<SimBank, HostBoundary>,
}

impl LedModule {
    /// Zugriff auf das registrierte Device
    pub fn device(&mut self) -> &mut LedDevice<SimBank, HostBoundary> {
        &mut self.device
    }
}

/// Installiert das LED-Modul auf der übergebenen Bank
///
/// # Fehlerbehandlung
/// Gibt den [`AcquireError`] der gescheiterten Leitung zurück; der
/// Guard hat dann bereits alle Belegungen zurückgerollt und die
/// Schnittstelle wird nie registriert.
pub fn module_start(bank: SimBank) -> Result<LedModule, AcquireError> {
    let lines = AcquiredLines::acquire_all(bank, LINE_TABLE).inspect_err(|err| {
        error!(
            "{DEVICE_NAME}: line request failed at index {} ({})",
            err.index, err.name
        );
    })?;
    info!("{DEVICE_NAME}: module installed, 4 lines held");
    Ok(LedModule {
        device: LedDevice::new(lines, HostBoundary),
    })
}

/// Entfernt das LED-Modul
///
/// Deregistriert die Schnittstelle (das Device wird konsumiert) und
/// gibt alle Leitungen frei.
pub fn module_stop(module: LedModule) {
    drop(module);
    info!("{DEVICE_NAME}: module removed");
}
