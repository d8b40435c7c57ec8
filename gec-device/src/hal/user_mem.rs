// Prozess-Grenze auf dem Host: direkte Slice-Kopie
//
// In-Process-Gegenstück zu copy_from_user/copy_to_user. Die Kopie
// kann hier nicht scheitern; der Fault-Pfad existiert für Bindings,
// deren Transfer tatsächlich fehlschlagen kann.

use gec_core::{TransferError, UserBoundary};

/// Direkte, fehlerfreie Slice-Kopie
#[derive(Debug, Clone, Copy, Default)]
pub struct HostBoundary;

impl UserBoundary for HostBoundary {
    fn copy_in(&mut self, dst: &mut [u8], src: &[u8]) -> Result<usize, TransferError> {
        dst.copy_from_slice(src);
        Ok(src.len())
    }

    fn copy_out(&mut self, dst: &mut [u8], src: &[u8]) -> Result<usize, TransferError> {
        dst.copy_from_slice(src);
        Ok(src.len())
    }
}
