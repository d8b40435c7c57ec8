// Hardware Abstraction Layer (HAL) Module
//
// Host-seitige Implementierungen der gec-core Traits.

pub mod gpio_bank;
pub mod user_mem;

pub use gpio_bank::SimBank;
pub use user_mem::HostBoundary;
