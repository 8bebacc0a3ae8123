// [libs/domain/commitments/src/errors.rs]
/*!
 * =================================================================
 * APARATO: COMMITMENT FAULT CATALOG (V6.0 - FLAT ENUMS)
 * CLASIFICACIÓN: DOMAIN COMMITMENTS (ESTRATO L3)
 * RESPONSABILIDAD: FALLOS DE DOMINIOS, FFT Y COMPROMISOS
 * =================================================================
 */

use thiserror::Error;

/// Fallos de la transformada radix-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FftError {
    /// El orden del dominio debe dividir a p - 1.
    #[error("domain order {got} must divide p - 1")]
    OrderMustDividePMinusOne {
        /// Orden solicitado.
        got: usize,
    },
    /// El orden del dominio debe ser potencia de dos.
    #[error("domain order {got} must be a power of two")]
    OrderMustBePowerOfTwo {
        /// Orden solicitado.
        got: usize,
    },
    /// El buffer no coincide con el orden del dominio.
    #[error("buffer length {got} does not match the domain order {expected}")]
    LengthMismatch {
        /// Orden del dominio.
        expected: usize,
        /// Longitud recibida.
        got: usize,
    },
}

/// Fallos de los dominios de interpolación y los compromisos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// Dos raíces del dominio coinciden.
    #[error("repeated interpolation root at index {index}")]
    RepeatedDomainRoot {
        /// Índice de la raíz repetida.
        index: usize,
    },
    /// La ráfaga no coincide con el tamaño esperado.
    #[error("length {got} does not match the expected {expected}")]
    LengthMismatch {
        /// Tamaño esperado.
        expected: usize,
        /// Tamaño recibido.
        got: usize,
    },
    /// Índice fuera del dominio de interpolación.
    #[error("index {index} outside the domain of size {size}")]
    IndexOutOfDomain {
        /// Índice solicitado.
        index: usize,
        /// Tamaño del dominio.
        size: usize,
    },
    /// La derivación hash-to-curve de un generador falló.
    #[error("generator derivation failed at index {index}")]
    GeneratorDerivationFailed {
        /// Índice del generador.
        index: usize,
    },
}
