// [libs/core/curve-engine/src/catalog/secp256k1.rs]
/*!
 * =================================================================
 * APARATO: SECP256K1 CURVE CATALOG (V5.0 - KOBLITZ GEOMETRY)
 * CLASIFICACIÓN: CORE GEOMETRY DATA (ESTRATO L1)
 * RESPONSABILIDAD: GENERADOR Y RETÍCULA GLV DE SECP256K1
 *
 * Constantes producidas en tiempo de generación; los elementos de
 * campo residen en forma Montgomery y los vectores de retícula en
 * complemento a dos módulo 2^256.
 * =================================================================
 */

use crate::traits::{CurveParameters, EndomorphismParameters};
use obsidian_core_math::prelude::{BigInt, FieldElement, Secp256k1Fp};


/// Curva secp256k1 (y^2 = x^3 + 7, cofactor 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1;

impl CurveParameters for Secp256k1 {
    type Field = FieldElement<Secp256k1Fp, 4>;
    const COEFF_B: Self::Field = FieldElement::from_montgomery_limbs([0x0000000700001ab7, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const COEFF_B3: Self::Field = FieldElement::from_montgomery_limbs([0x0000001500005025, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const GENERATOR_X: Self::Field = FieldElement::from_montgomery_limbs([0xd7362e5a487e2097, 0x231e295329bc66db, 0x979f48c033fd129c, 0x9981e643e9089f48]);
    const GENERATOR_Y: Self::Field = FieldElement::from_montgomery_limbs([0xb15ea6d2d3dbabe2, 0x8dfc5d5d1f1dc64d, 0x70b6b59aac19c136, 0xcf3f851fd4a582d6]);
    const ORDER: BigInt<4> = BigInt::from_limbs([0xbfd25e8cd0364141, 0xbaaedce6af48a03b, 0xfffffffffffffffe, 0xffffffffffffffff]);
    const ORDER_BITS: u32 = 256;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const NAME: &'static str = "secp256k1";
}

impl EndomorphismParameters for Secp256k1 {
    const ENDO_BETA: Self::Field = FieldElement::from_montgomery_limbs([0x58a4361c8e81894e, 0x03fde1631c4b80af, 0xf8e98978d02e3905, 0x7a4a36aebcbb3d53]);
    const ENDO_LAMBDA: BigInt<4> = BigInt::from_limbs([0xdf02967c1b23bd72, 0x122e22ea20816678, 0xa5261c028812645a, 0x5363ad4cc05c30e0]);
    const LATTICE_V1: [BigInt<4>; 2] = [BigInt::from_limbs([0xe86c90e49284eb15, 0x3086d221a7d46bcd, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x90ab8056f5401b3d, 0x1bbc8129fef177d7, 0xffffffffffffffff, 0xffffffffffffffff])];
    const LATTICE_V2: [BigInt<4>; 2] = [BigInt::from_limbs([0x57c1108d9d44cfd8, 0x14ca50f7a8e2f3f6, 0x0000000000000001, 0x0000000000000000]), BigInt::from_limbs([0xe86c90e49284eb15, 0x3086d221a7d46bcd, 0x0000000000000000, 0x0000000000000000])];
    const BABAI_G1: BigInt<6> = BigInt::from_limbs([0xe893209a45dbb031, 0x3daa8a1471e8ca7f, 0xe86c90e49284eb15, 0x3086d221a7d46bcd, 0x0000000000000000, 0x0000000000000000]);
    const BABAI_G1_IS_NEGATIVE: bool = false;
    const BABAI_G2: BigInt<6> = BigInt::from_limbs([0x1571b4ae8ac47f71, 0x221208ac9df506c6, 0x6f547fa90abfe4c4, 0xe4437ed6010e8828, 0x0000000000000000, 0x0000000000000000]);
    const BABAI_G2_IS_NEGATIVE: bool = false;
    const MINI_SCALAR_BITS: u32 = 128;
}
