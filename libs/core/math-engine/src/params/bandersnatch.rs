// [libs/core/math-engine/src/params/bandersnatch.rs]
/*!
 * =================================================================
 * APARATO: BANDERSNATCH SCALAR CATALOG (V3.0 - VERKLE LEDGER)
 * CLASIFICACIÓN: CORE MATH DATA (ESTRATO L1)
 * RESPONSABILIDAD: CAMPO ESCALAR DEL SUBGRUPO PRIMO DE BANDERSNATCH
 *
 * Tablas producidas en tiempo de generación a partir de la definición
 * del primo; toda constante de campo reside en forma Montgomery salvo
 * los módulos y exponentes, que son enteros canónicos.
 * =================================================================
 */

use crate::bigint::BigInt;
use crate::arithmetic::Word;
use crate::field::{FieldParameters};


/// Campo escalar del subgrupo primo de Bandersnatch / Banderwagon.
/// El campo base de la curva es 'Bls12381Fr'.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandersnatchFr;

impl FieldParameters<4> for BandersnatchFr {
    const MODULUS: BigInt<4> = BigInt::from_limbs([0x74fd06b52876e7e1, 0xff8f870074190471, 0x0cce760202687600, 0x1cfb69d4ca675f52]);
    const MODULUS_BITS: u32 = 253;
    const SPARE_BITS: u32 = 3;
    const MONTY_R2: BigInt<4> = BigInt::from_limbs([0xdbb4f5d658db47cb, 0x40fa7ca27fecb938, 0xaa9e6daec0055cea, 0x0ae793ddb14aec7d]);
    const MONTY_ONE: BigInt<4> = BigInt::from_limbs([0x5817ca56bc48c0f8, 0x0383c7fc5f37dc74, 0x998c4fefecbc4ff8, 0x1824b159acc5056f]);
    const MONTY_MU: Word = 0xf19f22295cc063df;
    const MODULUS_PLUS_ONE_HALF: BigInt<4> = BigInt::from_limbs([0xba7e835a943b73f1, 0x7fc7c3803a0c8238, 0x06673b0101343b00, 0x0e7db4ea6533afa9]);
    const SQRT_IS_THREE_MOD_FOUR: bool = false;
    const SQRT_EXPONENT: BigInt<4> = BigInt::from_limbs([0xc5d3f41ad4a1dba0, 0x03fe3e1c01d06411, 0x483339d80809a1d8, 0x0073eda753299d7d]);
    const TWO_ADICITY: u32 = 5;
    const SQRT_TONELLI_Q: BigInt<4> = BigInt::from_limbs([0x8ba7e835a943b73f, 0x07fc7c3803a0c823, 0x906673b0101343b0, 0x00e7db4ea6533afa]);
    const SQRT_TONELLI_C: BigInt<4> = BigInt::from_limbs([0x4b263b9a8d79c573, 0xeadb3d0a007af1fd, 0xa54c8a4668832589, 0x0610860c4254fb9d]);
}
