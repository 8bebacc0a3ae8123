// [libs/core/curve-engine/src/catalog/bandersnatch.rs]
/*!
 * =================================================================
 * APARATO: BANDERSNATCH CURVE CATALOG (V4.0 - VERKLE GEOMETRY)
 * CLASIFICACIÓN: CORE GEOMETRY DATA (ESTRATO L1)
 * RESPONSABILIDAD: TWISTED EDWARDS a = -5 SOBRE EL CAMPO ESCALAR DE BLS12-381
 *
 * Constantes producidas en tiempo de generación; los elementos de
 * campo residen en forma Montgomery y los vectores de retícula en
 * complemento a dos módulo 2^256.
 * =================================================================
 */

use crate::traits::EdwardsParameters;
use obsidian_core_math::prelude::{BigInt, Bls12381Fr, FieldElement};


/// Curva Bandersnatch: -5 x^2 + y^2 = 1 + d x^2 y^2 sobre Fr de
/// BLS12-381. El cociente por el subgrupo de orden 2 es Banderwagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bandersnatch;

impl EdwardsParameters for Bandersnatch {
    type Field = FieldElement<Bls12381Fr, 4>;
    const COEFF_A: Self::Field = FieldElement::from_montgomery_limbs([0xfffffff40000000c, 0xece3b023ffec4ff3, 0x66b620607396203f, 0x6f23d7e5f361df62]);
    const COEFF_D: Self::Field = FieldElement::from_montgomery_limbs([0xa8dced1b47a2c730, 0x381c065aad3cccc7, 0x53ff52e1188351f8, 0x362e8d63990fe940]);
    const GENERATOR_X: Self::Field = FieldElement::from_montgomery_limbs([0xec2627e1e7ab47f5, 0x3e63de484f01aa9c, 0xfe0f5c3b53946dc4, 0x2d71920baeb2cfcd]);
    const GENERATOR_Y: Self::Field = FieldElement::from_montgomery_limbs([0x4e30593e1895bd34, 0x156d738f32afbe4b, 0x45ef0b1ccdeb75f4, 0x6a7cca0037d2e71f]);
    const ORDER: BigInt<4> = BigInt::from_limbs([0x74fd06b52876e7e1, 0xff8f870074190471, 0x0cce760202687600, 0x1cfb69d4ca675f52]);
    const ORDER_BITS: u32 = 253;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x0000000000000004, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const NAME: &'static str = "bandersnatch";
}
