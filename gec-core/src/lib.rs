//! GEC Core - Platform-agnostic Treiber-Logik
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die statische Leitungstabelle, den
//! Resource Manager, den Kommando-Dispatcher und die Session-Schicht.

#![no_std]

pub mod device;
pub mod logic;
pub mod registry;
pub mod resource;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use device::{LedDevice, STAGING_CAPACITY, Session};
pub use logic::{ARG_INDEX_OFFSET, CMD_LED_OFF, CMD_LED_ON, DispatchError, decode_command};
pub use registry::{LINE_COUNT, LineTable, MAX_NAME_LEN, RegistryError};
pub use resource::{AcquireError, AcquiredLines};
pub use traits::{GpioBank, GpioError, TransferError, UserBoundary};
pub use types::{ACTIVE_LEVEL, AcquisitionState, IDLE_LEVEL, LedCommand, Level, LineDescriptor};
