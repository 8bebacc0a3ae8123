// [libs/core/math-engine/src/params/bls12_377.rs]
/*!
 * =================================================================
 * APARATO: BLS12-377 PARAMETER CATALOG (V3.0 - RECURSION LEDGER)
 * CLASIFICACIÓN: CORE MATH DATA (ESTRATO L1)
 * RESPONSABILIDAD: CONSTANTES DE CAMPO Y TORRE PARA BLS12-377
 *
 * La torre usa el no-residuo cuadrático beta = -5 (u^2 = -5) y el
 * no-residuo séxtico xi = u; el primo base es 1 mod 4, de modo que la
 * raíz cuadrada corre por Tonelli-Shanks. Tablas en forma Montgomery.
 * =================================================================
 */

use crate::arithmetic::Word;
use crate::bigint::BigInt;
use crate::field::{FieldParameters, FftFieldParameters, FieldElement};
use crate::fp2::{Fp2, TowerParameters};

/// Campo base Fp de BLS12-377 (377 bits, 6 limbs, p = 1 mod 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12377Fp;

/// Campo escalar Fr de BLS12-377 (253 bits, 2-ádico de orden 47).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12377Fr;

impl FieldParameters<6> for Bls12377Fp {
    const MODULUS: BigInt<6> = BigInt::from_limbs([0x8508c00000000001, 0x170b5d4430000000, 0x1ef3622fba094800, 0x1a22d9f300f5138f, 0xc63b05c06ca1493b, 0x01ae3a4617c510ea]);
    const MODULUS_BITS: u32 = 377;
    const SPARE_BITS: u32 = 7;
    const MONTY_R2: BigInt<6> = BigInt::from_limbs([0xb786686c9400cd22, 0x0329fcaab00431b1, 0x22a5f11162d6b46d, 0xbfdf7d03827dc3ac, 0x837e92f041790bf9, 0x006dfccb1e914b88]);
    const MONTY_ONE: BigInt<6> = BigInt::from_limbs([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]);
    const MONTY_MU: Word = 0x8508bfffffffffff;
    const MODULUS_PLUS_ONE_HALF: BigInt<6> = BigInt::from_limbs([0x4284600000000001, 0x0b85aea218000000, 0x8f79b117dd04a400, 0x8d116cf9807a89c7, 0x631d82e03650a49d, 0x00d71d230be28875]);
    const SQRT_IS_THREE_MOD_FOUR: bool = false;
    const SQRT_EXPONENT: BigInt<6> = BigInt::from_limbs([0xba88600000010a12, 0xc45f741290002e16, 0xb3e601ea271e3de6, 0x0b80d94292763445, 0x748c2f8a21d58c76, 0x000000000000035c]);
    const TWO_ADICITY: u32 = 46;
    const SQRT_TONELLI_Q: BigInt<6> = BigInt::from_limbs([0x7510c00000021423, 0x88bee82520005c2d, 0x67cc03d44e3c7bcd, 0x1701b28524ec688b, 0xe9185f1443ab18ec, 0x00000000000006b8]);
    const SQRT_TONELLI_C: BigInt<6> = BigInt::from_limbs([0x68f876aa8bb191f2, 0x254e4780a6722e51, 0xa818ea191f8a0eaf, 0x2c1a6dd31d8d5057, 0xcce5a0cba0df931b, 0x00ba7904c8cf8495]);
}

impl FieldParameters<4> for Bls12377Fr {
    const MODULUS: BigInt<4> = BigInt::from_limbs([0x0a11800000000001, 0x59aa76fed0000001, 0x60b44d1e5c37b001, 0x12ab655e9a2ca556]);
    const MODULUS_BITS: u32 = 253;
    const SPARE_BITS: u32 = 3;
    const MONTY_R2: BigInt<4> = BigInt::from_limbs([0x25d577bab861857b, 0xcc2c27b58860591f, 0xa7cc008fe5dc8593, 0x011fdae7eff1c939]);
    const MONTY_ONE: BigInt<4> = BigInt::from_limbs([0x7d1c7ffffffffff3, 0x7257f50f6ffffff2, 0x16d81575512c0fee, 0x0d4bda322bbb9a9d]);
    const MONTY_MU: Word = 0x0a117fffffffffff;
    const MODULUS_PLUS_ONE_HALF: BigInt<4> = BigInt::from_limbs([0x8508c00000000001, 0xacd53b7f68000000, 0x305a268f2e1bd800, 0x0955b2af4d1652ab]);
    const SQRT_IS_THREE_MOD_FOUR: bool = false;
    const SQRT_EXPONENT: BigInt<4> = BigInt::from_limbs([0x76fed00000010a12, 0x4d1e5c37b00159aa, 0x655e9a2ca55660b4, 0x00000000000012ab]);
    const TWO_ADICITY: u32 = 47;
    const SQRT_TONELLI_Q: BigInt<4> = BigInt::from_limbs([0xedfda00000021423, 0x9a3cb86f6002b354, 0xcabd34594aacc168, 0x0000000000002556]);
    const SQRT_TONELLI_C: BigInt<4> = BigInt::from_limbs([0x3c3d3ca739381fb2, 0x9a14cda3ec99772b, 0xd7aacc7c59724826, 0x0d1ba211c5cc349c]);
}

impl FftFieldParameters<4> for Bls12377Fr {
    const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt::from_limbs([0x3c3d3ca739381fb2, 0x9a14cda3ec99772b, 0xd7aacc7c59724826, 0x0d1ba211c5cc349c]);
}

impl TowerParameters<6> for Bls12377Fp {
    const FP2_NON_RESIDUE: FieldElement<Self, 6> =
        FieldElement::from_montgomery_limbs([0xfc0b8000000002fa, 0x97d39cf6e000018b, 0x2072420fbfa05044, 0xcbbcbd50d97c3802, 0x0baf1ec35813f9eb, 0x009974a2c0945ad2]);
    const XI: Fp2<Self, 6> = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        FieldElement::from_montgomery_limbs([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]),
    );
    const FROBENIUS: [[Fp2<Self, 6>; 6]; 3] = [
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x6ec47a04a3f7ca9e, 0xa42e0cb968c1fa44, 0x578d5187fbd2bd23, 0x930eeb0ac79dd4bd, 0xa24883de1e09a9ee, 0x00daa7058067d46f]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x5892506da58478da, 0x133366940ac2a74b, 0x9b64a150cdf726cf, 0x5cc426090a9c587e, 0x5cf848adfdcd640c, 0x004702bf3ac02380]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x982c13d9d084771f, 0xfd49de0c6da34a32, 0x61a530d183ab0e53, 0xdf8fe44106dd9879, 0x40f29b58d88472bc, 0x0158723199046d5d]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xdacd106da5847973, 0xd8fe2454bac2a79a, 0x1ada4fd6fd832edc, 0xfb9868449d150908, 0xd63eb8aeea32285e, 0x0167d6a36f873fd0]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x296799d52c8cac81, 0x591bd15304e14fee, 0x0a17df4987d85130, 0x4c80f9363f3fc3bc, 0x9eaa177aba7ac8ce, 0x007dcb2c189c98ed]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
        ],
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x5892506da58478da, 0x133366940ac2a74b, 0x9b64a150cdf726cf, 0x5cc426090a9c587e, 0x5cf848adfdcd640c, 0x004702bf3ac02380]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xdacd106da5847973, 0xd8fe2454bac2a79a, 0x1ada4fd6fd832edc, 0xfb9868449d150908, 0xd63eb8aeea32285e, 0x0167d6a36f873fd0]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x823ac00000000099, 0xc5cabdc0b000004f, 0x7f75ae862f8c080d, 0x9ed4423b9278b089, 0x79467000ec64c452, 0x0120d3e434c71c50]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x2c766f925a7b8727, 0x03d7f6b0253d58b5, 0x838ec0deec122131, 0xbd5eb3e9f658bb10, 0x6942bd126ed3e52e, 0x01673786dd04ed6a]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xaa3baf925a7b868e, 0x3e0d38ef753d5865, 0x04191258bc861923, 0x1e8a71ae63e00a87, 0xeffc4d11826f20dc, 0x004663a2a83dd119]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
        ],
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x982c13d9d084771f, 0xfd49de0c6da34a32, 0x61a530d183ab0e53, 0xdf8fe44106dd9879, 0x40f29b58d88472bc, 0x0158723199046d5d]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x823ac00000000099, 0xc5cabdc0b000004f, 0x7f75ae862f8c080d, 0x9ed4423b9278b089, 0x79467000ec64c452, 0x0120d3e434c71c50]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xecdcac262f7b88e2, 0x19c17f37c25cb5cd, 0xbd4e315e365e39ac, 0x3a92f5b1fa177b15, 0x85486a67941cd67e, 0x0055c8147ec0a38d]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x982c13d9d084771f, 0xfd49de0c6da34a32, 0x61a530d183ab0e53, 0xdf8fe44106dd9879, 0x40f29b58d88472bc, 0x0158723199046d5d]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
        ],
    ];
}
