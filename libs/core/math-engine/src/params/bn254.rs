// [libs/core/math-engine/src/params/bn254.rs]
/*!
 * =================================================================
 * APARATO: BN254 PARAMETER CATALOG (V6.0 - SNARKS LEDGER)
 * CLASIFICACIÓN: CORE MATH DATA (ESTRATO L1)
 * RESPONSABILIDAD: CONSTANTES DE CAMPO Y TORRE PARA BN254
 *
 * Tablas producidas en tiempo de generación a partir de la definición
 * del primo; toda constante de campo reside en forma Montgomery salvo
 * los módulos y exponentes, que son enteros canónicos.
 * =================================================================
 */

use crate::bigint::BigInt;
use crate::arithmetic::Word;
use crate::field::{FieldParameters, FftFieldParameters};
use crate::field::FieldElement;
use crate::fp2::{Fp2, TowerParameters};


/// Campo base Fp de BN254 (p = 36x^4 + 36x^3 + 24x^2 + 6x + 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bn254Fp;

/// Campo escalar Fr de BN254 (r = 36x^4 + 36x^3 + 18x^2 + 6x + 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bn254Fr;

impl FieldParameters<4> for Bn254Fp {
    const MODULUS: BigInt<4> = BigInt::from_limbs([0x3c208c16d87cfd47, 0x97816a916871ca8d, 0xb85045b68181585d, 0x30644e72e131a029]);
    const MODULUS_BITS: u32 = 254;
    const SPARE_BITS: u32 = 2;
    const MONTY_R2: BigInt<4> = BigInt::from_limbs([0xf32cfc5b538afa89, 0xb5e71911d44501fb, 0x47ab1eff0a417ff6, 0x06d89f71cab8351f]);
    const MONTY_ONE: BigInt<4> = BigInt::from_limbs([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]);
    const MONTY_MU: Word = 0x87d20782e4866389;
    const MODULUS_PLUS_ONE_HALF: BigInt<4> = BigInt::from_limbs([0x9e10460b6c3e7ea4, 0xcbc0b548b438e546, 0xdc2822db40c0ac2e, 0x183227397098d014]);
    const SQRT_IS_THREE_MOD_FOUR: bool = true;
    const SQRT_EXPONENT: BigInt<4> = BigInt::from_limbs([0x4f082305b61f3f52, 0x65e05aa45a1c72a3, 0x6e14116da0605617, 0x0c19139cb84c680a]);
    const TWO_ADICITY: u32 = 1;
    const SQRT_TONELLI_Q: BigInt<4> = BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const SQRT_TONELLI_C: BigInt<4> = BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
}

impl FieldParameters<4> for Bn254Fr {
    const MODULUS: BigInt<4> = BigInt::from_limbs([0x43e1f593f0000001, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029]);
    const MODULUS_BITS: u32 = 254;
    const SPARE_BITS: u32 = 2;
    const MONTY_R2: BigInt<4> = BigInt::from_limbs([0x1bb8e645ae216da7, 0x53fe3ab1e35c59e3, 0x8c49833d53bb8085, 0x0216d0b17f4e44a5]);
    const MONTY_ONE: BigInt<4> = BigInt::from_limbs([0xac96341c4ffffffb, 0x36fc76959f60cd29, 0x666ea36f7879462e, 0x0e0a77c19a07df2f]);
    const MONTY_MU: Word = 0xc2e1f593efffffff;
    const MODULUS_PLUS_ONE_HALF: BigInt<4> = BigInt::from_limbs([0xa1f0fac9f8000001, 0x9419f4243cdcb848, 0xdc2822db40c0ac2e, 0x183227397098d014]);
    const SQRT_IS_THREE_MOD_FOUR: bool = false;
    const SQRT_EXPONENT: BigInt<4> = BigInt::from_limbs([0xcdcb848a1f0faca0, 0x0c0ac2e9419f4243, 0x098d014dc2822db4, 0x0000000183227397]);
    const TWO_ADICITY: u32 = 28;
    const SQRT_TONELLI_Q: BigInt<4> = BigInt::from_limbs([0x9b9709143e1f593f, 0x181585d2833e8487, 0x131a029b85045b68, 0x000000030644e72e]);
    const SQRT_TONELLI_C: BigInt<4> = BigInt::from_limbs([0x636e735580d13d9c, 0xa22bf3742445ffd6, 0x56452ac01eb203d8, 0x1860ef942963f9e7]);
}

impl FftFieldParameters<4> for Bn254Fr {
    const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt::from_limbs([0x636e735580d13d9c, 0xa22bf3742445ffd6, 0x56452ac01eb203d8, 0x1860ef942963f9e7]);
}

impl TowerParameters<4> for Bn254Fp {
    const FP2_NON_RESIDUE: FieldElement<Self, 4> =
        FieldElement::from_montgomery_limbs([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa]);
    const XI: Fp2<Self, 4> = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xf60647ce410d7ff7, 0x2f3d6f4dd31bd011, 0x2943337e3940c6d1, 0x1d9598e8a7e39857]),
        FieldElement::from_montgomery_limbs([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]),
    );
    const FROBENIUS: [[Fp2<Self, 4>; 6]; 3] = [
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xaf9ba69633144907, 0xca6b1d7387afb78a, 0x11bded5ef08a2087, 0x02f34d751a1f3a7c]),
                FieldElement::from_montgomery_limbs([0xa222ae234c492d72, 0xd00f02a4565de15b, 0xdc2ff3a253dfc926, 0x10a75716b3899551]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xb5773b104563ab30, 0x347f91c8a9aa6454, 0x7a007127242e0991, 0x1956bcd8118214ec]),
                FieldElement::from_montgomery_limbs([0x6e849f1ea0aa4757, 0xaa1c7b6d89f89141, 0xb6e713cdfae0ca3a, 0x26694fbb4e82ebc3]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xe4bbdd0c2936b629, 0xbb30f162e133bacb, 0x31a9d1b6f9645366, 0x253570bea500f8dd]),
                FieldElement::from_montgomery_limbs([0xa1d77ce45ffe77c7, 0x07affd117826d1db, 0x6d16bd27bb7edc6b, 0x2c87200285defecc]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x7361d77f843abe92, 0xa5bb2bd3273411fb, 0x9c941f314b3e2399, 0x15df9cddbb9fd3ec]),
                FieldElement::from_montgomery_limbs([0x5dddfd154bd8c949, 0x62cb29a5a4445b60, 0x37bc870a0c7dd2b9, 0x24830a9d3171f0fd]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xc970692f41690fe7, 0xe240342127694b0b, 0x32bee66b83c459e8, 0x12aabced0ab08841]),
                FieldElement::from_montgomery_limbs([0x0d485d2340aebfa9, 0x05193418ab2fcc57, 0xd3b0a40b8a4910f5, 0x2f21ebb535d2925a]),
            ),
        ],
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xca8d800500fa1bf2, 0xf0c5d61468b39769, 0x0e201271ad0d4418, 0x04290f65bad856e6]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x08cfc388c494f1ab, 0x19b315148d1373d4, 0x584e90fdcb6c0213, 0x09e1685bdf2f8849]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
        ],
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x365316184e46d97d, 0x0af7129ed4c96d9f, 0x659da72fca1009b5, 0x08116d8983a20d23]),
                FieldElement::from_montgomery_limbs([0xb1df4af7c39c1939, 0x3d9f02878a73bf7f, 0x9b2220928caf0ae0, 0x26684515eff054a6]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xc9af22f716ad6bad, 0xb311782a4aa662b2, 0x19eeaf64e248c7f4, 0x20273e77e3439f82]),
                FieldElement::from_montgomery_limbs([0xacc02860f7ce93ac, 0x3933d5817ba76b4c, 0x69e6188b446c8467, 0x0a46036d4417cc55]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x5764af0aaf46471e, 0xdc50792e873e0fc1, 0x86a673ff881d04f6, 0x0b2eddb43c30a74c]),
                FieldElement::from_montgomery_limbs([0x9a490f32787e8580, 0x8fd16d7ff04af8b1, 0x4b39888ec6027bf2, 0x03dd2e705b52a15d]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x448a93a57b6762df, 0xbfd62df528fdeadf, 0xd858f5d00e9bd47a, 0x06b03d4d3476ec58]),
                FieldElement::from_montgomery_limbs([0x2b19daf4bcc936d1, 0xa1a54e7a56f4299f, 0xb533eee05adeaef1, 0x170c812b84dda0b2]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xe0bc4b2275cf559f, 0xc238b945c154e60f, 0x803982a5929a7d5e, 0x15ce052df7e4a37e]),
                FieldElement::from_montgomery_limbs([0x2d28efbdbf3799a7, 0x9b097e3c1ad60773, 0x982d4113af4a535b, 0x24e18991e3056063]),
            ),
        ],
    ];
}
