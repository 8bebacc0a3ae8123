// [libs/core/curve-engine/src/catalog/bn254.rs]
/*!
 * =================================================================
 * APARATO: BN254 CURVE CATALOG (V7.0 - SNARKS GEOMETRY)
 * CLASIFICACIÓN: CORE GEOMETRY DATA (ESTRATO L1)
 * RESPONSABILIDAD: GENERADORES, RETÍCULAS GLV/GLS Y PSI DE BN254
 *
 * Constantes producidas en tiempo de generación; los elementos de
 * campo residen en forma Montgomery y los vectores de retícula en
 * complemento a dos módulo 2^256.
 * =================================================================
 */

use crate::traits::{CurveParameters, EndomorphismParameters, GlsParameters};
use obsidian_core_math::prelude::{BigInt, Bn254Fp, FieldElement, Fp2};


/// Grupo G1 de BN254 sobre Fp (y^2 = x^3 + 3, cofactor 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bn254G1;

/// Grupo G2 de BN254 sobre el twist D y^2 = x^3 + 3 / (9 + u).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bn254G2;

impl CurveParameters for Bn254G1 {
    type Field = FieldElement<Bn254Fp, 4>;
    const COEFF_B: Self::Field = FieldElement::from_montgomery_limbs([0x7a17caa950ad28d7, 0x1f6ac17ae15521b9, 0x334bea4e696bd284, 0x2a1f6744ce179d8e]);
    const COEFF_B3: Self::Field = FieldElement::from_montgomery_limbs([0xf60647ce410d7ff7, 0x2f3d6f4dd31bd011, 0x2943337e3940c6d1, 0x1d9598e8a7e39857]);
    const GENERATOR_X: Self::Field = FieldElement::from_montgomery_limbs([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]);
    const GENERATOR_Y: Self::Field = FieldElement::from_montgomery_limbs([0xa6ba871b8b1e1b3a, 0x14f1d651eb8e167b, 0xccdd46def0f28c58, 0x1c14ef83340fbe5e]);
    const ORDER: BigInt<4> = BigInt::from_limbs([0x43e1f593f0000001, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029]);
    const ORDER_BITS: u32 = 254;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const NAME: &'static str = "bn254-g1";
}

impl EndomorphismParameters for Bn254G1 {
    const ENDO_BETA: Self::Field = FieldElement::from_montgomery_limbs([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0]);
    const ENDO_LAMBDA: BigInt<4> = BigInt::from_limbs([0xb8ca0b2d36636f23, 0xcc37a73fec2bc5e9, 0x048b6e193fd84104, 0x30644e72e131a029]);
    const LATTICE_V1: [BigInt<4>; 2] = [BigInt::from_limbs([0x8211bbeb7d4f1128, 0x6f4d8248eeb859fc, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x762cda976b2dec1d, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff])];
    const LATTICE_V2: [BigInt<4>; 2] = [BigInt::from_limbs([0x762cda976b2dec1d, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0xf41b1eabeddedaf5, 0x90b27db71147a602, 0xffffffffffffffff, 0xffffffffffffffff])];
    const BABAI_G1: BigInt<6> = BigInt::from_limbs([0x163b4843cb4b9a5f, 0x149d540fd5e495cc, 0x5398fd0300ff6565, 0x4ccef014a773d2d2, 0x0000000000000002, 0x0000000000000000]);
    const BABAI_G1_IS_NEGATIVE: bool = false;
    const BABAI_G2: BigInt<6> = BigInt::from_limbs([0x8fa7d32d2fafba64, 0x6eb9c714773a6ef2, 0xd91d232ec7e0b3d7, 0x0000000000000002, 0x0000000000000000, 0x0000000000000000]);
    const BABAI_G2_IS_NEGATIVE: bool = true;
    const MINI_SCALAR_BITS: u32 = 128;
}

impl CurveParameters for Bn254G2 {
    type Field = Fp2<Bn254Fp, 4>;
    const COEFF_B: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x3bf938e377b802a8, 0x020b1b273633535d, 0x26b7edf049755260, 0x2514c6324384a86d]),
        FieldElement::from_montgomery_limbs([0x38e7ecccd1dcff67, 0x65f0b37d93ce0d3e, 0xd749d0dd22ac00aa, 0x0141b9ce4a688d4d]),
    );
    const COEFF_B3: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x3baa927cb62e0d6a, 0xd71e7c52d1b664fd, 0x03873e63d95d4664, 0x0e75b5b1082ab8f4]),
        FieldElement::from_montgomery_limbs([0xaab7c6667596fe35, 0x31d21a78bb6a27ba, 0x85dd7297680401ff, 0x03c52d6adf39a7e9]),
    );
    const GENERATOR_X: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x8e83b5d102bc2026, 0xdceb1935497b0172, 0xfbb8264797811adf, 0x19573841af96503b]),
        FieldElement::from_montgomery_limbs([0xafb4737da84c6140, 0x6043dd5a5802d8c4, 0x09e950fc52a02f86, 0x14fef0833aea7b6b]),
    );
    const GENERATOR_Y: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x619dfa9d886be9f6, 0xfe7fd297f59e9b78, 0xff9e1a62231b7dfe, 0x28fd7eebae9e4206]),
        FieldElement::from_montgomery_limbs([0x64095b56c71856ee, 0xdc57f922327d3cbb, 0x55f935be33351076, 0x0da4a0e693fd6482]),
    );
    const ORDER: BigInt<4> = BigInt::from_limbs([0x43e1f593f0000001, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029]);
    const ORDER_BITS: u32 = 254;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x345f2299c0f9fa8d, 0x06ceecda572a2489, 0xb85045b68181585e, 0x30644e72e131a029, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const NAME: &'static str = "bn254-g2";
}

impl GlsParameters for Bn254G2 {
    const PSI_X: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xb5773b104563ab30, 0x347f91c8a9aa6454, 0x7a007127242e0991, 0x1956bcd8118214ec]),
        FieldElement::from_montgomery_limbs([0x6e849f1ea0aa4757, 0xaa1c7b6d89f89141, 0xb6e713cdfae0ca3a, 0x26694fbb4e82ebc3]),
    );
    const PSI_Y: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xe4bbdd0c2936b629, 0xbb30f162e133bacb, 0x31a9d1b6f9645366, 0x253570bea500f8dd]),
        FieldElement::from_montgomery_limbs([0xa1d77ce45ffe77c7, 0x07affd117826d1db, 0x6d16bd27bb7edc6b, 0x2c87200285defecc]),
    );
    const PSI_EIGENVALUE: BigInt<4> = BigInt::from_limbs([0xf83e9682e87cfd46, 0x6f4d8248eeb859fb, 0x0000000000000000, 0x0000000000000000]);
    const LATTICE: [[BigInt<4>; 4]; 4] = [
        [BigInt::from_limbs([0x89d3256894d213e3, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x89d3256894d213e2, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
        [BigInt::from_limbs([0x89d3256894d213e2, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x44e992b44a6909f2, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0xbb166d4bb596f60f, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x44e992b44a6909f1, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
        [BigInt::from_limbs([0xbb166d4bb596f60f, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x44e992b44a6909f1, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0xbb166d4bb596f60f, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x762cda976b2dec1d, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff])],
        [BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x762cda976b2dec1d, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x762cda976b2dec1e, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff])],
    ];
    const BABAI: [BigInt<6>; 4] = [
        BigInt::from_limbs([0x55e0990306357ea3, 0xa3f693b55c93362e, 0x071c4c43fac4daff, 0x55b4ca7ba3e55782, 0x9e80318ab0d92b95, 0x0000000000000000]),
        BigInt::from_limbs([0x26aae8ee6232ef66, 0xa0238b58186d4326, 0x0865552764c8e8f0, 0x5e9aa4e2a056dc2c, 0x3d00631561b25728, 0x0000000000000001]),
        BigInt::from_limbs([0x8fa7d32d2fafba64, 0x6eb9c714773a6ef2, 0xd91d232ec7e0b3d7, 0x0000000000000002, 0x0000000000000000, 0x0000000000000000]),
        BigInt::from_limbs([0xd69f2f027ee767b0, 0x23038c29bb8bb4ff, 0xc170977dcef3cd3f, 0x55b4ca7ba3e5577d, 0x9e80318ab0d92b95, 0x0000000000000000]),
    ];
    const BABAI_IS_NEGATIVE: [bool; 4] = [false, false, false, false];
    const MINI_SCALAR_BITS: u32 = 64;
}

/// Parámetro x de la familia BN (positivo), para las rutinas del loop.
pub const BN254_X: BigInt<4> = BigInt::from_limbs([0x44e992b44a6909f1, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
