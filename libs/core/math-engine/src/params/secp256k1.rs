// [libs/core/math-engine/src/params/secp256k1.rs]
/*!
 * =================================================================
 * APARATO: SECP256K1 PARAMETER CATALOG (V4.0 - KOBLITZ LEDGER)
 * CLASIFICACIÓN: CORE MATH DATA (ESTRATO L1)
 * RESPONSABILIDAD: CONSTANTES DE CAMPO PARA SECP256K1
 *
 * Tablas producidas en tiempo de generación a partir de la definición
 * del primo; toda constante de campo reside en forma Montgomery salvo
 * los módulos y exponentes, que son enteros canónicos.
 * =================================================================
 */

use crate::bigint::BigInt;
use crate::arithmetic::Word;
use crate::field::{FieldParameters};


/// Campo base Fp de secp256k1 (p = 2^256 - 2^32 - 977).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1Fp;

/// Campo escalar Fn de secp256k1 (orden del grupo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1Fr;

impl FieldParameters<4> for Secp256k1Fp {
    const MODULUS: BigInt<4> = BigInt::from_limbs([0xfffffffefffffc2f, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]);
    const MODULUS_BITS: u32 = 256;
    const SPARE_BITS: u32 = 0;
    const MONTY_R2: BigInt<4> = BigInt::from_limbs([0x000007a2000e90a1, 0x0000000000000001, 0x0000000000000000, 0x0000000000000000]);
    const MONTY_ONE: BigInt<4> = BigInt::from_limbs([0x00000001000003d1, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MONTY_MU: Word = 0xd838091dd2253531;
    const MODULUS_PLUS_ONE_HALF: BigInt<4> = BigInt::from_limbs([0xffffffff7ffffe18, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]);
    const SQRT_IS_THREE_MOD_FOUR: bool = true;
    const SQRT_EXPONENT: BigInt<4> = BigInt::from_limbs([0xffffffffbfffff0c, 0xffffffffffffffff, 0xffffffffffffffff, 0x3fffffffffffffff]);
    const TWO_ADICITY: u32 = 1;
    const SQRT_TONELLI_Q: BigInt<4> = BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const SQRT_TONELLI_C: BigInt<4> = BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
}

impl FieldParameters<4> for Secp256k1Fr {
    const MODULUS: BigInt<4> = BigInt::from_limbs([0xbfd25e8cd0364141, 0xbaaedce6af48a03b, 0xfffffffffffffffe, 0xffffffffffffffff]);
    const MODULUS_BITS: u32 = 256;
    const SPARE_BITS: u32 = 0;
    const MONTY_R2: BigInt<4> = BigInt::from_limbs([0x896cf21467d7d140, 0x741496c20e7cf878, 0xe697f5e45bcd07c6, 0x9d671cd581c69bc5]);
    const MONTY_ONE: BigInt<4> = BigInt::from_limbs([0x402da1732fc9bebf, 0x4551231950b75fc4, 0x0000000000000001, 0x0000000000000000]);
    const MONTY_MU: Word = 0x4b0dff665588b13f;
    const MODULUS_PLUS_ONE_HALF: BigInt<4> = BigInt::from_limbs([0xdfe92f46681b20a1, 0x5d576e7357a4501d, 0xffffffffffffffff, 0x7fffffffffffffff]);
    const SQRT_IS_THREE_MOD_FOUR: bool = false;
    const SQRT_EXPONENT: BigInt<4> = BigInt::from_limbs([0x777fa4bd19a06c83, 0xfd755db9cd5e9140, 0xffffffffffffffff, 0x01ffffffffffffff]);
    const TWO_ADICITY: u32 = 6;
    const SQRT_TONELLI_Q: BigInt<4> = BigInt::from_limbs([0xeeff497a3340d905, 0xfaeabb739abd2280, 0xffffffffffffffff, 0x03ffffffffffffff]);
    const SQRT_TONELLI_C: BigInt<4> = BigInt::from_limbs([0xe823f5b94e5b77cf, 0xcab86f88ecd9ebea, 0xd3d93fa52862700f, 0xd6304d1f577eeabe]);
}
