// [libs/domain/commitments/src/lib.rs]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

/*!
 * =================================================================
 * APARATO: COMMITMENTS MASTER HUB (V9.0 - POLYNOMIAL STACK)
 * CLASIFICACIÓN: DOMAIN COMMITMENTS (ESTRATO L3)
 * RESPONSABILIDAD: PRIMITIVAS POLINOMIALES Y DE COMPROMISO
 *
 * Evaluación en forma de coeficientes y Lagrange/barycentric, FFT
 * radix-2 sobre los subgrupos 2-ádicos del catálogo, compromisos
 * vectoriales de Pedersen respaldados por el MSM y el transcript
 * Fiat-Shamir de separación de dominio explícita.
 * =================================================================
 */

/// Dominios de interpolación, pesos barycentric y cocientes.
pub mod barycentric;
/// Catálogo de fallos.
pub mod errors;
/// FFT / IFFT radix-2 con estados de validación de dominio.
pub mod fft;
/// Compromisos vectoriales de Pedersen.
pub mod pedersen;
/// Evaluación polinomial en forma de coeficientes.
pub mod polynomial;
/// Transcript Fiat-Shamir.
pub mod transcript;

/**
 * PRELUDIO DE COMPROMISOS
 */
pub mod prelude {
    pub use crate::barycentric::BarycentricDomain;
    pub use crate::errors::{CommitmentError, FftError};
    pub use crate::fft::EvaluationDomain;
    pub use crate::pedersen::PedersenCommitter;
    pub use crate::polynomial::{
        evaluate_polynomial, evaluate_vanishing_polynomial, evaluate_with_derivative,
        vanishing_polynomial_coefficients,
    };
    pub use crate::transcript::Transcript;
}
