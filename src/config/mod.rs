//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de entorno y las tablas de referencia
//! (reglas de intervalo y modificadores) cargadas una vez al inicio.

pub mod environment;
pub mod intervals;

pub use environment::*;
pub use intervals::{resolve_modifiers, resolve_rules, DEFAULT_INTERVAL_RULES, DEFAULT_MODIFIERS};
