// [libs/core/curve-engine/src/catalog/bls12_381.rs]
/*!
 * =================================================================
 * APARATO: BLS12-381 CURVE CATALOG (V7.0 - SIGNATURE GEOMETRY)
 * CLASIFICACIÓN: CORE GEOMETRY DATA (ESTRATO L1)
 * RESPONSABILIDAD: GENERADORES, RETÍCULAS GLV/GLS Y PSI DE BLS12-381
 *
 * Constantes producidas en tiempo de generación; los elementos de
 * campo residen en forma Montgomery y los vectores de retícula en
 * complemento a dos módulo 2^256.
 * =================================================================
 */

use crate::traits::{CurveParameters, EndomorphismParameters, GlsParameters};
use obsidian_core_math::prelude::{BigInt, Bls12381Fp, FieldElement, Fp2};


/// Grupo G1 de BLS12-381 sobre Fp (y^2 = x^3 + 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12381G1;

/// Grupo G2 de BLS12-381 sobre el twist M y^2 = x^3 + 4 (1 + u).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12381G2;

impl CurveParameters for Bls12381G1 {
    type Field = FieldElement<Bls12381Fp, 6>;
    const COEFF_B: Self::Field = FieldElement::from_montgomery_limbs([0xaa270000000cfff3, 0x53cc0032fc34000a, 0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7, 0x8ec9733bbf78ab2f, 0x09d645513d83de7e]);
    const COEFF_B3: Self::Field = FieldElement::from_montgomery_limbs([0x447600000027552e, 0xdcb8009a43480020, 0x6f7ee9ce4a6e8b59, 0xb10330b7c0a95bc6, 0x6140b1fcfb1e54b7, 0x0381be097f0bb4e1]);
    const GENERATOR_X: Self::Field = FieldElement::from_montgomery_limbs([0x5cb38790fd530c16, 0x7817fc679976fff5, 0x154f95c7143ba1c1, 0xf0ae6acdf3d0e747, 0xedce6ecc21dbf440, 0x120177419e0bfb75]);
    const GENERATOR_Y: Self::Field = FieldElement::from_montgomery_limbs([0xbaac93d50ce72271, 0x8c22631a7918fd8e, 0xdd595f13570725ce, 0x51ac582950405194, 0x0e1c8c3fad0059c0, 0x0bbc3efc5008a26a]);
    const ORDER: BigInt<4> = BigInt::from_limbs([0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48]);
    const ORDER_BITS: u32 = 255;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x8c00aaab0000aaab, 0x396c8c005555e156, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const NAME: &'static str = "bls12-381-g1";
}

impl EndomorphismParameters for Bls12381G1 {
    const ENDO_BETA: Self::Field = FieldElement::from_montgomery_limbs([0x30f1361b798a64e8, 0xf3b8ddab7ece5a2a, 0x16a8ca3ac61577f7, 0xc26a2ff874fd029b, 0x3636b76660701c6e, 0x051ba4ab241b6160]);
    const ENDO_LAMBDA: BigInt<4> = BigInt::from_limbs([0xfffffffe00000001, 0xa7780001fffcb7fc, 0x3339d80809a1d804, 0x73eda753299d7d48]);
    const LATTICE_V1: [BigInt<4>; 2] = [BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0xffffffff00000001, 0x53ba5bfefffe5bfd, 0xffffffffffffffff, 0xffffffffffffffff])];
    const LATTICE_V2: [BigInt<4>; 2] = [BigInt::from_limbs([0x0000000100000000, 0xac45a4010001a402, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])];
    const BABAI_G1: BigInt<6> = BigInt::from_limbs([0x38b5dcb707e08ed3, 0x355094edfede377c, 0x0000000000000002, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const BABAI_G1_IS_NEGATIVE: bool = false;
    const BABAI_G2: BigInt<6> = BigInt::from_limbs([0xa1a872d6818be407, 0x034eb4b927adc027, 0x63f6e522f6cfee2e, 0x7c6becf1e01faadd, 0x0000000000000001, 0x0000000000000000]);
    const BABAI_G2_IS_NEGATIVE: bool = false;
    const MINI_SCALAR_BITS: u32 = 128;
}

impl CurveParameters for Bls12381G2 {
    type Field = Fp2<Bls12381Fp, 6>;
    const COEFF_B: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xaa270000000cfff3, 0x53cc0032fc34000a, 0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7, 0x8ec9733bbf78ab2f, 0x09d645513d83de7e]),
        FieldElement::from_montgomery_limbs([0xaa270000000cfff3, 0x53cc0032fc34000a, 0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7, 0x8ec9733bbf78ab2f, 0x09d645513d83de7e]),
    );
    const COEFF_B3: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x447600000027552e, 0xdcb8009a43480020, 0x6f7ee9ce4a6e8b59, 0xb10330b7c0a95bc6, 0x6140b1fcfb1e54b7, 0x0381be097f0bb4e1]),
        FieldElement::from_montgomery_limbs([0x447600000027552e, 0xdcb8009a43480020, 0x6f7ee9ce4a6e8b59, 0xb10330b7c0a95bc6, 0x6140b1fcfb1e54b7, 0x0381be097f0bb4e1]),
    );
    const GENERATOR_X: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xf5f28fa202940a10, 0xb3f5fb2687b4961a, 0xa1a893b53e2ae580, 0x9894999d1a3caee9, 0x6f67b7631863366b, 0x058191924350bcd7]),
        FieldElement::from_montgomery_limbs([0xa5a9c0759e23f606, 0xaaa0c59dbccd60c3, 0x3bb17e18e2867806, 0x1b1ab6cc8541b367, 0xc2b6ed0ef2158547, 0x11922a097360edf3]),
    );
    const GENERATOR_Y: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x4c730af860494c4a, 0x597cfa1f5e369c5a, 0xe7e6856caa0a635a, 0xbbefb5e96e0d495f, 0x07d3a975f0ef25a2, 0x0083fd8e7e80dae5]),
        FieldElement::from_montgomery_limbs([0xadc0fc92df64b05d, 0x18aa270a2b1461dc, 0x86adac6a3be4eba0, 0x79495c4ec93da33a, 0xe7175850a43ccaed, 0x0b2bc2a163de1bf2]),
    );
    const ORDER: BigInt<4> = BigInt::from_limbs([0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48]);
    const ORDER_BITS: u32 = 255;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0xcf1c38e31c7238e5, 0x1616ec6e786f0c70, 0x21537e293a6691ae, 0xa628f1cb4d9e82ef, 0xa68a205b2e5a7ddf, 0xcd91de4547085aba, 0x091d50792876a202, 0x05d543a95414e7f1]);
    const NAME: &'static str = "bls12-381-g2";
}

impl GlsParameters for Bls12381G2 {
    const PSI_X: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        FieldElement::from_montgomery_limbs([0x890dc9e4867545c3, 0x2af322533285a5d5, 0x50880866309b7e2c, 0xa20d1b8c7e881024, 0x14e4f04fe2db9068, 0x14e56d3f1564853a]),
    );
    const PSI_Y: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8]),
        FieldElement::from_montgomery_limbs([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2]),
    );
    const PSI_EIGENVALUE: BigInt<4> = BigInt::from_limbs([0x2dfefffeffff0001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48]);
    const LATTICE: [[BigInt<4>; 4]; 4] = [
        [BigInt::from_limbs([0xd201000000010000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
        [BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0xd201000000010000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
        [BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0xd201000000010000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
        [BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x2dfeffffffff0000, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0xfffffffffffffffe, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x2dfeffffffff0000, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff])],
    ];
    const BABAI: [BigInt<6>; 4] = [
        BigInt::from_limbs([0xbf413b309e17ac17, 0xf77cf78a2942e441, 0x92078a5e8573b29c, 0x33cfcc0d3e76ec28, 0x381204ca56cd56b5, 0x0000000000000001]),
        BigInt::from_limbs([0x68f2961f79ab5533, 0xcdfe1fcb28cf88ab, 0x63f6e522f6cfee2b, 0x7c6becf1e01faadd, 0x0000000000000001, 0x0000000000000000]),
        BigInt::from_limbs([0xd467e85511a23797, 0xb2ef66a238a975bf, 0xcfbe4f7bd0027db2, 0x0000000000000001, 0x0000000000000000, 0x0000000000000000]),
        BigInt::from_limbs([0x38b5dcb707e08ed3, 0x355094edfede377c, 0x0000000000000002, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ];
    const BABAI_IS_NEGATIVE: [bool; 4] = [false, true, false, false];
    const MINI_SCALAR_BITS: u32 = 64;
}

/// Magnitud |x| del parámetro de BLS12-381 (x es negativo).
pub const BLS12381_X_MAGNITUDE: BigInt<4> = BigInt::from_limbs([0xd201000000010000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
