// [libs/core/math-engine/src/params/ed25519.rs]
/*!
 * =================================================================
 * APARATO: CURVE25519 FIELD CATALOG (V2.0 - EDWARDS LEDGER)
 * CLASIFICACIÓN: CORE MATH DATA (ESTRATO L1)
 * RESPONSABILIDAD: CAMPO BASE 2^255 - 19 DE EDWARDS25519
 *
 * p = 5 mod 8: la raíz cuadrada corre por Tonelli-Shanks con
 * valuación 2-ádica 2. Tablas en forma Montgomery.
 * =================================================================
 */

use crate::arithmetic::Word;
use crate::bigint::BigInt;
use crate::field::FieldParameters;

/// Campo base de Edwards25519 (p = 2^255 - 19).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Fp;

impl FieldParameters<4> for Ed25519Fp {
    const MODULUS: BigInt<4> = BigInt::from_limbs([0xffffffffffffffed, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]);
    const MODULUS_BITS: u32 = 255;
    const SPARE_BITS: u32 = 1;
    const MONTY_R2: BigInt<4> = BigInt::from_limbs([0x00000000000005a4, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MONTY_ONE: BigInt<4> = BigInt::from_limbs([0x0000000000000026, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const MONTY_MU: Word = 0x86bca1af286bca1b;
    const MODULUS_PLUS_ONE_HALF: BigInt<4> = BigInt::from_limbs([0xfffffffffffffff7, 0xffffffffffffffff, 0xffffffffffffffff, 0x3fffffffffffffff]);
    const SQRT_IS_THREE_MOD_FOUR: bool = false;
    const SQRT_EXPONENT: BigInt<4> = BigInt::from_limbs([0xfffffffffffffffe, 0xffffffffffffffff, 0xffffffffffffffff, 0x0fffffffffffffff]);
    const TWO_ADICITY: u32 = 2;
    const SQRT_TONELLI_Q: BigInt<4> = BigInt::from_limbs([0xfffffffffffffffb, 0xffffffffffffffff, 0xffffffffffffffff, 0x1fffffffffffffff]);
    const SQRT_TONELLI_C: BigInt<4> = BigInt::from_limbs([0x3b5807d4fe2bdb04, 0x03f590fdb51be9ed, 0x6d6e16bf336202d1, 0x75776b0bd6c71ba8]);
}
