// Library-Root: Host-Backends und Modul-Lifecycle

// Module
pub mod config;
pub mod hal;
pub mod module;

// Re-exports von gec-core
pub use gec_core::{
    AcquireError, CMD_LED_OFF, CMD_LED_ON, DispatchError, LedDevice, Level, Session,
    TransferError,
};

// Re-exports der Host-Implementierungen
pub use hal::{HostBoundary, SimBank};
pub use module::{LedModule, module_start, module_stop};
