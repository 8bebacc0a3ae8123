// [libs/core/curve-engine/src/errors.rs]
/*!
 * =================================================================
 * APARATO: GEOMETRY FAULT CATALOG (V12.0 - STATUS LEDGER)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: ESTADOS DE DESERIALIZACIÓN DE PUNTOS Y ESCALARES
 *
 * Los bytes hostiles jamás producen pánico: cada códec retorna un
 * estado explícito que el llamador debe inspeccionar. Las primitivas
 * aritméticas no participan de este catálogo (son totales).
 * =================================================================
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/**
 * Estado de la deserialización de un punto o escalar.
 *
 * 'Success' y 'PointAtInfinity' son resultados válidos; el resto son
 * rechazos. Los códecs retornan los rechazos como error y los éxitos
 * como valor; 'from_infinity_flag' reconstruye el estado completo.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DeserializationStatus {
    /// Punto finito válido.
    #[error("success")]
    Success,
    /// Codificación válida del punto en el infinito.
    #[error("point at infinity")]
    PointAtInfinity,
    /// Longitud o banderas ilegales.
    #[error("invalid encoding (length or flag bits)")]
    InvalidEncoding,
    /// Una coordenada decodificada alcanza o supera el módulo.
    #[error("coordinate greater than or equal to the field modulus")]
    CoordinateGreaterThanOrEqualModulus,
    /// El punto decodificado no satisface la ecuación de la curva.
    #[error("point is not on the curve")]
    PointNotOnCurve,
    /// El punto pertenece a la curva pero no al subgrupo primo.
    #[error("point is not in the prime-order subgroup")]
    PointNotInSubgroup,
}

impl DeserializationStatus {
    /// Estado completo de un éxito según el indicador de infinito.
    #[must_use]
    pub fn from_infinity_flag(is_infinity: bool) -> Self {
        if is_infinity {
            Self::PointAtInfinity
        } else {
            Self::Success
        }
    }
}
