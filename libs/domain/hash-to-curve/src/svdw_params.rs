// [libs/domain/hash-to-curve/src/svdw_params.rs]
/*!
 * =================================================================
 * APARATO: SVDW PARAMETER LEDGER (V6.0 - GENERATED CONSTANTS)
 * CLASIFICACIÓN: DOMAIN H2C DATA (ESTRATO L3)
 * RESPONSABILIDAD: CONSTANTES Z, c1..c4 DEL MAPA POR CURVA
 *
 * Producidas en tiempo de generación según el procedimiento de
 * selección de Z del constructo IETF; forma Montgomery.
 * =================================================================
 */

use crate::svdw::SvdwParameters;
use obsidian_core_curve::prelude::{Bls12377G1, Bls12377G2, Bls12381G1, Bls12381G2, Bn254G1, Bn254G2, Secp256k1};
use obsidian_core_math::prelude::{FieldElement, Fp2};

impl SvdwParameters for Bn254G1 {
    const SVDW_Z: Self::Field = FieldElement::from_montgomery_limbs([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]);
    const SVDW_C1: Self::Field = FieldElement::from_montgomery_limbs([0x115482203dbf392d, 0x926242126eaa626a, 0xe16a48076063c052, 0x07c5909386eddc93]);
    const SVDW_C2: Self::Field = FieldElement::from_montgomery_limbs([0xb461a4448976f7d5, 0xc6843fb439555fa7, 0x28f0d12384840918, 0x112ceb58a394e07d]);
    const SVDW_C3: Self::Field = FieldElement::from_montgomery_limbs([0x7c8487078735ab72, 0x51da7e0048bfb8d4, 0x945cfd183cbd7bf4, 0x0b70b1ec48ae62c6]);
    const SVDW_C4: Self::Field = FieldElement::from_montgomery_limbs([0xa79a2bdca0800831, 0x19fd7617e49815a1, 0xbb8d0c885550c7b1, 0x05c4aeb6ec7e0f48]);
}

impl SvdwParameters for Bls12381G1 {
    const SVDW_Z: Self::Field = FieldElement::from_montgomery_limbs([0xcbe1fffffff6000a, 0x9827ffd8c7d7fff7, 0x17b8aedce8bcd83b, 0xc5fad9948998326e, 0xcd3da75be2de413d, 0x0c201972bcfd0614]);
    const SVDW_C1: Self::Field = FieldElement::from_montgomery_limbs([0xed1cffffffb455a1, 0x3283fed73d7bffc1, 0x804ac4babeea4207, 0x15c7f6e3eeff9fb8, 0x9985b69dac1a42fe, 0x0ef2e2b0fc697ad0]);
    const SVDW_C2: Self::Field = FieldElement::from_montgomery_limbs([0xd40e00000004aaa6, 0x529800124d680003, 0x5b547b3282528a06, 0x8179debaaeb8f988, 0xe47cd40851dc8c38, 0x13f10530db01638f]);
    const SVDW_C3: Self::Field = FieldElement::from_montgomery_limbs([0xa79d7ec1bb728f69, 0xde71ffc7bead6157, 0xfaee511a2882c350, 0x92d5303a3823f741, 0x70a8555ff782f798, 0x181220a203579aec]);
    const SVDW_C4: Self::Field = FieldElement::from_montgomery_limbs([0xf33dda12f68fe05a, 0x124b8e6490134267, 0x75b3ebbc407665ce, 0x260fd93e25abd98a, 0xd4054c95e27eb430, 0x039067234fadfb1f]);
}

impl SvdwParameters for Secp256k1 {
    const SVDW_Z: Self::Field = FieldElement::from_montgomery_limbs([0x00000001000003d1, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const SVDW_C1: Self::Field = FieldElement::from_montgomery_limbs([0x0000000800001e88, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const SVDW_C2: Self::Field = FieldElement::from_montgomery_limbs([0xfffffffefffffc2f, 0xffffffffffffffff, 0xffffffffffffffff, 0x7fffffffffffffff]);
    const SVDW_C3: Self::Field = FieldElement::from_montgomery_limbs([0xf6b24e699c29fb6c, 0x7273105f490dfe12, 0x490b21fab232124d, 0x47b35d8346b6848f]);
    const SVDW_C4: Self::Field = FieldElement::from_montgomery_limbs([0xfffffff4555528cf, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]);
}

impl SvdwParameters for Bn254G2 {
    const SVDW_Z: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]),
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    );
    const SVDW_C1: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xd335f05a64ca12fe, 0x75029bbec388940d, 0xd4d64ba9406d402e, 0x02baef80fc5ae772]),
        FieldElement::from_montgomery_limbs([0x38e7ecccd1dcff67, 0x65f0b37d93ce0d3e, 0xd749d0dd22ac00aa, 0x0141b9ce4a688d4d]),
    );
    const SVDW_C2: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xb461a4448976f7d5, 0xc6843fb439555fa7, 0x28f0d12384840918, 0x112ceb58a394e07d]),
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    );
    const SVDW_C3: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xaaad0cab9a24277f, 0xf2209f5b7e5b757a, 0xc3a46b7e850013a7, 0x1f9e7f3768c5c9af]),
        FieldElement::from_montgomery_limbs([0x412278c8de85d863, 0xfe3e4c7f559d375a, 0x5e44b9da0a96ad23, 0x297d818d387725c8]),
    );
    const SVDW_C4: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x63cdc796b49b3a32, 0x73a8220d40eb16f6, 0xb46d1eed55c49000, 0x1c9ef4f5f0528b82]),
        FieldElement::from_montgomery_limbs([0x9aeb505b1600fe13, 0x64eb25e9f8b4638f, 0x43edd9e4fdf1577a, 0x2eb756b528a63917]),
    );
}

impl SvdwParameters for Bls12381G2 {
    const SVDW_Z: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206]),
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    );
    const SVDW_C1: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xee1d00000009aaa1, 0x86840025e97c0007, 0x4f7823c40df41de8, 0x9e7c71f069ece051, 0x7dde005a606d6b99, 0x0de0f8777c82e085]),
        FieldElement::from_montgomery_limbs([0xaa270000000cfff3, 0x53cc0032fc34000a, 0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7, 0x8ec9733bbf78ab2f, 0x09d645513d83de7e]),
    );
    const SVDW_C2: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x1804000000015554, 0x855000053ab00001, 0x633cb57c253c276f, 0x6e22d1ec31ebb502, 0xd3916126f2d14ca2, 0x17fbb8571a006596]),
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    );
    const SVDW_C3: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x3bd8d86de6303e44, 0x697376c820a968ae, 0x4ad2b457d282a50d, 0x3056d97ecd8e9378, 0xfab1c35c3fd6f0e7, 0x0c592c60126f8172]),
        FieldElement::from_montgomery_limbs([0x1dec6c36f3181f22, 0xb4b9bb641054b457, 0x25695a2be9415286, 0x982b6cbf66c749bc, 0x7d58e1ae1feb7873, 0x062c96300937c0b9]),
    );
    const SVDW_C4: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x0fd7fffffff2aab8, 0xcadfffcbb51ffff5, 0x1fa0e9268ba675a4, 0xb2a3ccc60ccaede8, 0xbc52347a83d301a7, 0x102acc98fbfc081b]),
        FieldElement::from_montgomery_limbs([0xbfcaaaaaaa98e3a0, 0x0e7fffba46d55546, 0xd4d68c3364ddf231, 0x43851108110e928a, 0x506d9b4e0519578a, 0x158e66214ffab57a]),
    );
}

impl SvdwParameters for Bls12377G1 {
    const SVDW_Z: Self::Field = FieldElement::from_montgomery_limbs([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]);
    const SVDW_C1: Self::Field = FieldElement::from_montgomery_limbs([0x059bfffffffffed0, 0xa2813f06ffffff62, 0x3efb675314fa7fe4, 0xf69d2f6edcf8c60b, 0x99e92b7f007909d0, 0x011accc3c5fbe934]);
    const SVDW_C2: Self::Field = FieldElement::from_montgomery_limbs([0x03a1c0000000004d, 0xee6b0d8270000028, 0x4f34885af4caa806, 0xdc7b8e1749b6e20c, 0x9fc0bae0ac8306c6, 0x016787152646169d]);
    const SVDW_C3: Self::Field = FieldElement::from_montgomery_limbs([0x1d310ec61bb69c79, 0xfedd1500ad6fa28b, 0xbf158fb55d2e5c06, 0xb72c352759ed109e, 0x35fc81c3418e226c, 0x002a7002fe17a55d]);
    const SVDW_C4: Self::Field = FieldElement::from_montgomery_limbs([0xa9e65555555556ec, 0xf0b8285195555628, 0xd54aa3d0dc13b579, 0x2f5ce35adaa5bcaf, 0x906d2301e58aff38, 0x00c4920317b6df9d]);
}

impl SvdwParameters for Bls12377G2 {
    const SVDW_Z: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x823ac00000000099, 0xc5cabdc0b000004f, 0x7f75ae862f8c080d, 0x9ed4423b9278b089, 0x79467000ec64c452, 0x0120d3e434c71c50]),
        FieldElement::from_montgomery_limbs([0x823ac00000000099, 0xc5cabdc0b000004f, 0x7f75ae862f8c080d, 0x9ed4423b9278b089, 0x79467000ec64c452, 0x0120d3e434c71c50]),
    );
    const SVDW_C1: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x1320fffffffff7ac, 0x155b44203ffffbac, 0x3d124a86aab45f40, 0x55c0e43c06f91c12, 0x1c74197750ca1fca, 0x0102b0420acf1cc5]),
        FieldElement::from_montgomery_limbs([0x860e266666666555, 0x3076982d8999990b, 0xbedfbd6deb49b4b4, 0xaffad64793ddb626, 0xe55da84bfc8d3114, 0x015490be36f08877]),
    );
    const SVDW_C2: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x8166ffffffffffb4, 0x28a04fc1bfffffd8, 0xcfbed9d4c53e9ff9, 0x3da74bdbb73e3182, 0x267a4adfc01e4274, 0x0046b330f17efa4d]),
        FieldElement::from_montgomery_limbs([0x8166ffffffffffb4, 0x28a04fc1bfffffd8, 0xcfbed9d4c53e9ff9, 0x3da74bdbb73e3182, 0x267a4adfc01e4274, 0x0046b330f17efa4d]),
    );
    const SVDW_C3: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xa4986736538a7efc, 0x49332b269f4d5278, 0x3b0f79c45115111c, 0xf96256b8655e6aeb, 0xc81989de3f2e2692, 0x017d742d9aa618d7]),
        FieldElement::from_montgomery_limbs([0xab12037b67b700a2, 0xc886b15a40c781c1, 0x3e6e0f94f8f9bcf5, 0xf75d2d8771e7b203, 0x6b2da1b4d7d81d21, 0x0083725cfade25c8]),
    );
    const SVDW_C4: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xe293612f684bd93d, 0xecc2d3909f684b6a, 0x6410321c40c2e58d, 0x3150e06af0cbe974, 0x77edbf949d7e9be6, 0x00b712ad18a9f8d0]),
        FieldElement::from_montgomery_limbs([0x32779d6480f2b910, 0x58070cf6cae758b9, 0x41d4c7d57a787858, 0x79a0e8a4d431ae2f, 0xbcb6ec4390d37cc5, 0x00855a8a4559a713]),
    );
}
