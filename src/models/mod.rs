//! Modelos del sistema
//!
//! Este módulo contiene los registros de entrada (servicio, vehículo, reglas)
//! y las estructuras de resultado que produce el motor de analítica.

pub mod interval_rule;
pub mod prediction;
pub mod service_record;
pub mod vehicle;

pub use interval_rule::*;
pub use prediction::*;
pub use service_record::*;
pub use vehicle::*;
