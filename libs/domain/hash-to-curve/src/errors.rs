// [libs/domain/hash-to-curve/src/errors.rs]
/*!
 * =================================================================
 * APARATO: H2C FAULT CATALOG (V4.0 - FLAT ENUM)
 * CLASIFICACIÓN: DOMAIN H2C (ESTRATO L3)
 * RESPONSABILIDAD: FALLOS DE LA EXPANSIÓN DE MENSAJES
 * =================================================================
 */

use thiserror::Error;

/// Fallos del pipeline hash-to-curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HashToCurveError {
    /// La etiqueta de separación de dominio supera los 255 bytes.
    #[error("domain separation tag of {got} bytes exceeds the 255-byte limit")]
    DstTooLong {
        /// Longitud recibida.
        got: usize,
    },
    /// La longitud de salida excede el límite del constructo XMD.
    #[error("requested expansion of {requested} bytes exceeds the xmd limit")]
    OutputLengthTooLarge {
        /// Longitud solicitada.
        requested: usize,
    },
}
