// [libs/core/pairing-engine/src/errors.rs]
/*!
 * =================================================================
 * APARATO: PAIRING FAULT CATALOG (V5.0 - FLAT ENUM)
 * CLASIFICACIÓN: CORE PAIRING (ESTRATO L2)
 * RESPONSABILIDAD: FALLOS DE LAS FRONTERAS DEL MULTI-PAIRING
 * =================================================================
 */

use thiserror::Error;

/// Fallos de las fronteras del motor de pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PairingError {
    /// Las ráfagas G1 y G2 del multi-pairing difieren en longitud.
    #[error("multi-pairing input lengths differ: {left} vs {right}")]
    MismatchedInputLengths {
        /// Longitud de la ráfaga G1.
        left: usize,
        /// Longitud de la ráfaga G2.
        right: usize,
    },
    /// Un punto de entrada no pertenece al subgrupo primo.
    #[error("input point outside the prime-order subgroup")]
    PointNotInSubgroup,
}
