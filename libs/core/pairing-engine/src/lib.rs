// [libs/core/pairing-engine/src/lib.rs]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

/*!
 * =================================================================
 * APARATO: PAIRING ENGINE MASTER HUB (V8.0 - OPTIMAL ATE)
 * CLASIFICACIÓN: CORE PAIRING (ESTRATO L2)
 * RESPONSABILIDAD: ORQUESTACIÓN DEL PAIRING OPTIMAL-ATE
 *
 * El lazo de Miller acumula líneas dispersas sobre el twist (6x + 2
 * con corrección Frobenius para BN, |x| con conjugación final para
 * BLS) y la exponenciación final corre por cadenas ciclotómicas en el
 * parámetro x de cada familia.
 * =================================================================
 */

/// Catálogo de fallos del motor.
pub mod errors;
/// Exponenciación final: parte fácil y cadenas duras por familia.
pub mod final_exp;
/// Pasos de línea proyectivos sobre el twist.
pub mod lines;
/// Lazo de Miller con acumulador compartido.
pub mod miller;
/// Contratos y parámetros ate por familia.
pub mod parameters;
/// Pairing de un par y multi-pairing.
pub mod pairing;

/**
 * PRELUDIO BILINEAL SOBERANO
 */
pub mod prelude {
    pub use crate::errors::PairingError;
    pub use crate::final_exp::{easy_part, final_exponentiation};
    pub use crate::lines::{add_step, double_step, LineCoefficients, MillerAccumulator};
    pub use crate::miller::{multi_miller_loop, prepare_pair, PreparedPair};
    pub use crate::parameters::PairingParameters;
    pub use crate::pairing::{multi_pairing, optimal_ate_pairing};
}
