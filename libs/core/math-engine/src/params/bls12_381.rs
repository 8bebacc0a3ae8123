// [libs/core/math-engine/src/params/bls12_381.rs]
/*!
 * =================================================================
 * APARATO: BLS12-381 PARAMETER CATALOG (V6.0 - SIGNATURE LEDGER)
 * CLASIFICACIÓN: CORE MATH DATA (ESTRATO L1)
 * RESPONSABILIDAD: CONSTANTES DE CAMPO Y TORRE PARA BLS12-381
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


/// Campo base Fp de BLS12-381 (381 bits, 6 limbs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12381Fp;

/// Campo escalar Fr de BLS12-381 (255 bits, 2-ádico de orden 32).
/// Es también el campo base de la curva Bandersnatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12381Fr;

impl FieldParameters<6> for Bls12381Fp {
    const MODULUS: BigInt<6> = BigInt::from_limbs([0xb9feffffffffaaab, 0x1eabfffeb153ffff, 0x6730d2a0f6b0f624, 0x64774b84f38512bf, 0x4b1ba7b6434bacd7, 0x1a0111ea397fe69a]);
    const MODULUS_BITS: u32 = 381;
    const SPARE_BITS: u32 = 3;
    const MONTY_R2: BigInt<6> = BigInt::from_limbs([0xf4df1f341c341746, 0x0a76e6a609d104f1, 0x8de5476c4c95b6d5, 0x67eb88a9939d83c0, 0x9a793e85b519952d, 0x11988fe592cae3aa]);
    const MONTY_ONE: BigInt<6> = BigInt::from_limbs([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]);
    const MONTY_MU: Word = 0x89f3fffcfffcfffd;
    const MODULUS_PLUS_ONE_HALF: BigInt<6> = BigInt::from_limbs([0xdcff7fffffffd556, 0x0f55ffff58a9ffff, 0xb39869507b587b12, 0xb23ba5c279c2895f, 0x258dd3db21a5d66b, 0x0d0088f51cbff34d]);
    const SQRT_IS_THREE_MOD_FOUR: bool = true;
    const SQRT_EXPONENT: BigInt<6> = BigInt::from_limbs([0xee7fbfffffffeaab, 0x07aaffffac54ffff, 0xd9cc34a83dac3d89, 0xd91dd2e13ce144af, 0x92c6e9ed90d2eb35, 0x0680447a8e5ff9a6]);
    const TWO_ADICITY: u32 = 1;
    const SQRT_TONELLI_Q: BigInt<6> = BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const SQRT_TONELLI_C: BigInt<6> = BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
}

impl FieldParameters<4> for Bls12381Fr {
    const MODULUS: BigInt<4> = BigInt::from_limbs([0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48]);
    const MODULUS_BITS: u32 = 255;
    const SPARE_BITS: u32 = 1;
    const MONTY_R2: BigInt<4> = BigInt::from_limbs([0xc999e990f3f29c6d, 0x2b6cedcb87925c23, 0x05d314967254398f, 0x0748d9d99f59ff11]);
    const MONTY_ONE: BigInt<4> = BigInt::from_limbs([0x00000001fffffffe, 0x5884b7fa00034802, 0x998c4fefecbc4ff5, 0x1824b159acc5056f]);
    const MONTY_MU: Word = 0xfffffffeffffffff;
    const MODULUS_PLUS_ONE_HALF: BigInt<4> = BigInt::from_limbs([0x7fffffff80000001, 0xa9ded2017fff2dff, 0x199cec0404d0ec02, 0x39f6d3a994cebea4]);
    const SQRT_IS_THREE_MOD_FOUR: bool = false;
    const SQRT_EXPONENT: BigInt<4> = BigInt::from_limbs([0x7fff2dff80000000, 0x04d0ec02a9ded201, 0x94cebea4199cec04, 0x0000000039f6d3a9]);
    const TWO_ADICITY: u32 = 32;
    const SQRT_TONELLI_Q: BigInt<4> = BigInt::from_limbs([0xfffe5bfeffffffff, 0x09a1d80553bda402, 0x299d7d483339d808, 0x0000000073eda753]);
    const SQRT_TONELLI_C: BigInt<4> = BigInt::from_limbs([0x9cab6d5c0c17f47c, 0x1ce1e93dfd4b71e5, 0x0d6db230471dd505, 0x3f0ee990743a3b6a]);
}

impl FftFieldParameters<4> for Bls12381Fr {
    const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt::from_limbs([0x9cab6d5c0c17f47c, 0x1ce1e93dfd4b71e5, 0x0d6db230471dd505, 0x3f0ee990743a3b6a]);
}

impl TowerParameters<6> for Bls12381Fp {
    const FP2_NON_RESIDUE: FieldElement<Self, 6> =
        FieldElement::from_montgomery_limbs([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206]);
    const XI: Fp2<Self, 6> = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]),
        FieldElement::from_montgomery_limbs([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]),
    );
    const FROBENIUS: [[Fp2<Self, 6>; 6]; 3] = [
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x07089552b319d465, 0xc6695f92b50a8313, 0x97e83cccd117228f, 0xa35baecab2dc29ee, 0x1ce393ea5daace4d, 0x08f2220fb0fb66eb]),
                FieldElement::from_montgomery_limbs([0xb2f66aad4ce5d646, 0x5842a06bfc497cec, 0xcf4895d42599d394, 0xc11b9cba40a8e8d0, 0x2e3813cbe5a0de89, 0x110eefda88847faf]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
                FieldElement::from_montgomery_limbs([0xcd03c9e48671f071, 0x5dab22461fcda5d2, 0x587042afd3851b95, 0x8eb60ebe01bacb9e, 0x03f97d6e83d050d2, 0x18f0206554638741]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2]),
                FieldElement::from_montgomery_limbs([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x890dc9e4867545c3, 0x2af322533285a5d5, 0x50880866309b7e2c, 0xa20d1b8c7e881024, 0x14e4f04fe2db9068, 0x14e56d3f1564853a]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x82d83cf50dbce43f, 0xa2813e53df9d018f, 0xc6f0caa53c65e181, 0x7525cf528d50fe95, 0x4a85ed50f4798a6b, 0x171da0fd6cf8eebd]),
                FieldElement::from_montgomery_limbs([0x3726c30af242c66c, 0x7c2ac1aad1b6fe70, 0xa04007fbba4b14a2, 0xef517c3266341429, 0x0095ba654ed2226b, 0x02e370eccc86f7dd]),
            ),
        ],
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xecfb361b798dba3a, 0xc100ddb891865a2c, 0x0ec08ff1232bda8e, 0xd5c13cc6f1ca4721, 0x47222a47bf7b5c04, 0x0110f184e51c5f59]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x30f1361b798a64e8, 0xf3b8ddab7ece5a2a, 0x16a8ca3ac61577f7, 0xc26a2ff874fd029b, 0x3636b76660701c6e, 0x051ba4ab241b6160]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0xcd03c9e48671f071, 0x5dab22461fcda5d2, 0x587042afd3851b95, 0x8eb60ebe01bacb9e, 0x03f97d6e83d050d2, 0x18f0206554638741]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x890dc9e4867545c3, 0x2af322533285a5d5, 0x50880866309b7e2c, 0xa20d1b8c7e881024, 0x14e4f04fe2db9068, 0x14e56d3f1564853a]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
        ],
        [
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8]),
                FieldElement::from_montgomery_limbs([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
                FieldElement::from_montgomery_limbs([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8]),
                FieldElement::from_montgomery_limbs([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206]),
                FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
            ),
            Fp2::from_coordinates(
                FieldElement::from_montgomery_limbs([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2]),
                FieldElement::from_montgomery_limbs([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8]),
            ),
        ],
    ];
}
