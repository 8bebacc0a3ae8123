// [libs/domain/hash-to-curve/src/lib.rs]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

/*!
 * =================================================================
 * APARATO: H2C MASTER HUB (V7.0 - DETERMINISTIC ORACLE)
 * CLASIFICACIÓN: DOMAIN H2C (ESTRATO L3)
 * RESPONSABILIDAD: HASH DETERMINISTA DE MENSAJES A PUNTOS
 *
 * expand_message_xmd (SHA-256) -> hash_to_field -> mapa SVDW ->
 * limpieza de cofactor. Todo el pipeline es determinista en
 * (mensaje, etiqueta) y aterriza en el subgrupo primo.
 * =================================================================
 */

/// Catálogo de fallos.
pub mod errors;
/// Expansión de mensajes del constructo IETF.
pub mod expand;
/// Reducción de bytes uniformes a elementos de campo.
pub mod hash_to_field;
/// Pipeline completo mensaje -> punto.
pub mod pipeline;
/// Mapa universal Shallue - van de Woestijne.
pub mod svdw;
/// Constantes SVDW generadas por curva.
pub mod svdw_params;

/**
 * PRELUDIO HASH-TO-CURVE
 */
pub mod prelude {
    pub use crate::errors::HashToCurveError;
    pub use crate::expand::expand_message_xmd;
    pub use crate::hash_to_field::{hash_to_field, HashableFieldElement};
    pub use crate::pipeline::{encode_to_curve, hash_to_curve};
    pub use crate::svdw::{map_to_curve_svdw, SvdwParameters};
}
