// [libs/core/curve-engine/src/catalog/jubjub.rs]
/*!
 * =================================================================
 * APARATO: JUBJUB CURVE CATALOG (V2.0 - SAPLING GEOMETRY)
 * CLASIFICACIÓN: CORE GEOMETRY DATA (ESTRATO L1)
 * RESPONSABILIDAD: TWISTED EDWARDS a = -1 SOBRE Fr DE BLS12-381
 *
 * a = -1 es cuadrado y d no lo es: la adición unificada es completa
 * sobre toda la curva. El generador canónico se deriva del barrido de
 * ordenadas mínimas con limpieza de cofactor 8.
 * =================================================================
 */

use crate::traits::EdwardsParameters;
use obsidian_core_math::prelude::{BigInt, Bls12381Fr, FieldElement};

/// Curva Jubjub: -x^2 + y^2 = 1 + d x^2 y^2 sobre Fr de BLS12-381.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jubjub;

impl EdwardsParameters for Jubjub {
    type Field = FieldElement<Bls12381Fr, 4>;
    const COEFF_A: Self::Field = FieldElement::from_montgomery_limbs([0xfffffffd00000003, 0xfb38ec08fffb13fc, 0x99ad88181ce5880f, 0x5bc8f5f97cd877d8]);
    const COEFF_D: Self::Field = FieldElement::from_montgomery_limbs([0x2a522455b974f6b0, 0xfc6cc9ef0d9acab3, 0x7a08fb94c27628d1, 0x57f8f6a8fe0e262e]);
    const GENERATOR_X: Self::Field = FieldElement::from_montgomery_limbs([0xed0415e6e262a0c2, 0x965e49363de71f87, 0xd701dfeba955bab6, 0x6e3f01237fab2c70]);
    const GENERATOR_Y: Self::Field = FieldElement::from_montgomery_limbs([0xe2394472e82a5cf3, 0xea98a73a8ad35d0d, 0xd129c57c16a20624, 0x376ae9a01530eb56]);
    const ORDER: BigInt<4> = BigInt::from_limbs([0xd0970e5ed6f72cb7, 0xa6682093ccc81082, 0x06673b0101343b00, 0x0e7db4ea6533afa9]);
    const ORDER_BITS: u32 = 252;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x0000000000000008, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const NAME: &'static str = "jubjub";
}
