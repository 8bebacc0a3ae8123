// [libs/core/curve-engine/src/catalog/bls12_377.rs]
/*!
 * =================================================================
 * APARATO: BLS12-377 CURVE CATALOG (V3.0 - RECURSION GEOMETRY)
 * CLASIFICACIÓN: CORE GEOMETRY DATA (ESTRATO L1)
 * RESPONSABILIDAD: GENERADORES, RETÍCULAS GLV/GLS Y PSI DE BLS12-377
 *
 * Los generadores canónicos se derivan deterministamente del barrido
 * de abscisas mínimas con limpieza de cofactor. Twist de tipo D
 * (y^2 = x^3 + 1 / xi) con parámetro x positivo.
 * =================================================================
 */

use crate::traits::{CurveParameters, EndomorphismParameters, GlsParameters};
use obsidian_core_math::prelude::{BigInt, Bls12377Fp, FieldElement, Fp2};

/// Grupo G1 de BLS12-377 sobre Fp (y^2 = x^3 + 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12377G1;

/// Grupo G2 de BLS12-377 sobre el twist D y^2 = x^3 + 1 / xi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12377G2;

impl CurveParameters for Bls12377G1 {
    type Field = FieldElement<Bls12377Fp, 6>;
    const COEFF_B: Self::Field = FieldElement::from_montgomery_limbs([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]);
    const COEFF_B3: Self::Field = FieldElement::from_montgomery_limbs([0x0869fffffffffe38, 0xf3c1de8a7fffff13, 0xde791afc9f77bfd6, 0x71ebc7264b752910, 0xe6ddc13e80b58eb9, 0x01a83325a8f9ddce]);
    const GENERATOR_X: Self::Field = FieldElement::from_montgomery_limbs([0x260f33b9772451f4, 0xc54dd773169d5658, 0x5c1551c469a510dd, 0x761662e4425e1698, 0xc97d78cc6f065272, 0x00a41206b361fd4d]);
    const GENERATOR_Y: Self::Field = FieldElement::from_montgomery_limbs([0x8193961fb8cb81f3, 0x00638d4c5f44adb8, 0xfafaf3dad4daf54a, 0xc27849e2d655cd18, 0x2ec3ddb401d52814, 0x007da93326303c71]);
    const ORDER: BigInt<4> = BigInt::from_limbs([0x0a11800000000001, 0x59aa76fed0000001, 0x60b44d1e5c37b001, 0x12ab655e9a2ca556]);
    const ORDER_BITS: u32 = 253;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x0000000000000000, 0x170b5d4430000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const NAME: &'static str = "bls12-377-g1";
}

impl EndomorphismParameters for Bls12377G1 {
    const ENDO_BETA: Self::Field = FieldElement::from_montgomery_limbs([0xdacd106da5847973, 0xd8fe2454bac2a79a, 0x1ada4fd6fd832edc, 0xfb9868449d150908, 0xd63eb8aeea32285e, 0x0167d6a36f873fd0]);
    const ENDO_LAMBDA: BigInt<4> = BigInt::from_limbs([0x0a11800000000000, 0x452217cc90000001, 0x0000000000000000, 0x0000000000000000]);
    const LATTICE_V1: [BigInt<4>; 2] = [BigInt::from_limbs([0x0a11800000000000, 0x452217cc90000001, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff])];
    const LATTICE_V2: [BigInt<4>; 2] = [BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0a11800000000001, 0x452217cc90000001, 0x0000000000000000, 0x0000000000000000])];
    const BABAI_G1: BigInt<6> = BigInt::from_limbs([0x5cc5a03b7b820cf7, 0x3366fc876f25c6b5, 0x7f72ed32af90182c, 0xb3f7aa969fd37160, 0x0000000000000003, 0x0000000000000000]);
    const BABAI_G1_IS_NEGATIVE: bool = false;
    const BABAI_G2: BigInt<6> = BigInt::from_limbs([0x3947927eaa01523f, 0xb65247b102cb27b9, 0x000000000000000d, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const BABAI_G2_IS_NEGATIVE: bool = false;
    const MINI_SCALAR_BITS: u32 = 128;
}

impl CurveParameters for Bls12377G2 {
    type Field = Fp2<Bls12377Fp, 6>;
    const COEFF_B: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        FieldElement::from_montgomery_limbs([0x8072266666666685, 0x8df55926899999a9, 0x7fe4561ad64f34cf, 0xb95da6d8b6e4f01b, 0x4b747cccfc142743, 0x0039c3fa70f49f43]),
    );
    const COEFF_B3: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
        FieldElement::from_montgomery_limbs([0x815673333333338f, 0xa9e00b739cccccfc, 0x7fad025082ed9e6e, 0x2c18f48a24aed052, 0xe25d7666f43c75cb, 0x00ad4bef52ddddc9]),
    );
    const GENERATOR_X: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x8183ea68fd4dc118, 0x8be1c7986094eaf5, 0xb841e043af63e3b5, 0x52632c19f1a987db, 0x04f3e05e0cb5634f, 0x0123a48dde58e3e4]),
        FieldElement::from_montgomery_limbs([0x9390095e60e28f16, 0x95e19afc8c496941, 0xdfaad1b8204232b1, 0xa3ef4f8eefab7ca3, 0xa2b13fdb2d5c8c60, 0x00cde85b33bcb037]),
    );
    const GENERATOR_Y: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0xff41fff188640bb6, 0x32e0e07c3cd67132, 0xbc969d251830d073, 0x77d59543d9475f8c, 0x6a3096176a89f4ec, 0x0082282f462467ee]),
        FieldElement::from_montgomery_limbs([0x35788bd8304279cf, 0x606065ae0e9be718, 0xf2c360344b67d781, 0x057f7e5198d15954, 0xb28a138e41e43486, 0x012b5fea10c08217]),
    );
    const ORDER: BigInt<4> = BigInt::from_limbs([0x0a11800000000001, 0x59aa76fed0000001, 0x60b44d1e5c37b001, 0x12ab655e9a2ca556]);
    const ORDER_BITS: u32 = 253;
    const COFACTOR: BigInt<8> = BigInt::from_limbs([0x0000000000000001, 0x452217cc90000000, 0xa0f3622fba094800, 0xd693e8c36676bd09, 0x8c505634fae2e189, 0xfbb36b00e1dcc40c, 0xddd88d99a6f6a829, 0x0026ba558ae9562a]);
    const NAME: &'static str = "bls12-377-g2";
}

impl GlsParameters for Bls12377G2 {
    const PSI_X: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x5892506da58478da, 0x133366940ac2a74b, 0x9b64a150cdf726cf, 0x5cc426090a9c587e, 0x5cf848adfdcd640c, 0x004702bf3ac02380]),
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    );
    const PSI_Y: Self::Field = Fp2::from_coordinates(
        FieldElement::from_montgomery_limbs([0x982c13d9d084771f, 0xfd49de0c6da34a32, 0x61a530d183ab0e53, 0xdf8fe44106dd9879, 0x40f29b58d88472bc, 0x0158723199046d5d]),
        FieldElement::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    );
    const PSI_EIGENVALUE: BigInt<4> = BigInt::from_limbs([0x8508c00000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
    const LATTICE: [[BigInt<4>; 4]; 4] = [
        [BigInt::from_limbs([0x7af73fffffffffff, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
        [BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x7af73fffffffffff, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
        [BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x7af73fffffffffff, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
        [BigInt::from_limbs([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0x8508c00000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), BigInt::from_limbs([0xfffffffffffffffe, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]), BigInt::from_limbs([0x8508c00000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])],
    ];
    const BABAI: [BigInt<6>; 4] = [
        BigInt::from_limbs([0xc84f54d08dd0873c, 0x6aa368887d66a923, 0x2979759b442f60d0, 0xf63abaff9084ce15, 0xeca0125755aed064, 0x0000000000000001]),
        BigInt::from_limbs([0xea367b3e277f6878, 0xc6c26d25698f7742, 0x7f72ed32af901810, 0xb3f7aa969fd37160, 0x0000000000000003, 0x0000000000000000]),
        BigInt::from_limbs([0xa680b81361474fec, 0x8ca92bff12f226ff, 0x2030ba8ee9c06422, 0x0000000000000007, 0x0000000000000000, 0x0000000000000000]),
        BigInt::from_limbs([0x3947927eaa01523f, 0xb65247b102cb27b9, 0x000000000000000d, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]),
    ];
    const BABAI_IS_NEGATIVE: [bool; 4] = [true, true, true, false];
    const MINI_SCALAR_BITS: u32 = 64;
}

/// Parámetro x de BLS12-377 (positivo).
pub const BLS12377_X: BigInt<4> = BigInt::from_limbs([0x8508c00000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]);
