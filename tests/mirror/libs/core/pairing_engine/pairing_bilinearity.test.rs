// [tests/mirror/libs/core/pairing_engine/pairing_bilinearity.test.rs]
/*!
 * =================================================================
 * APARATO: BILINEARITY CERTIFIER (V10.0 - GT CONTRACTS)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-PAIRING
 * RESPONSABILIDAD: BILINEALIDAD, NO DEGENERACIÓN Y MULTI-PAIRING
 * =================================================================
 */

use obsidian_core_curve::prelude::*;
use obsidian_core_math::prelude::{BigInt, Bls12377Fp, Bls12381Fp, Bn254Fp, FieldParameters, Fp12};
use obsidian_core_pairing::prelude::*;

/// Valor e(G1, G2) de BN254, coeficientes Fp en el orden
/// (c0.c0.c0, c0.c0.c1, c0.c1.c0, .., c1.c2.c1).
const BN254_GT_KAT: [&str; 12] = [
    "0x12c70e90e12b7874510cd1707e8856f71bf7f61d72631e268fca81000db9a1f5",
    "0x084f330485b09e866bc2f2ea2b897394deaf3f12aa31f28cb0552990967d4704",
    "0x0e841c2ac18a4003ac9326b9558380e0bc27fdd375e3605f96b819a358d34bde",
    "0x2067586885c3318eeffa1938c754fe3c60224ee5ae15e66af6b5104c47c8c5d8",
    "0x01676555de427abc409c4a394bc5426886302996919d4bf4bdd02236e14b3636",
    "0x2b03614464f04dd772d86df88674c270ffc8747ea13e72da95e3594468f222c4",
    "0x2c53748bcd21a7c038fb30ddc8ac3bf0af25d7859cfbc12c30c866276c565909",
    "0x27ed208e7a0b55ae6e710bbfbd2fd922669c026360e37cc5b2ab862411536104",
    "0x1ad9db1937fd72f4ac462173d31d3d6117411fa48dba8d499d762b47edb3b54a",
    "0x279db296f9d479292532c7c493d8e0722b6efae42158387564889c79fc038ee3",
    "0x0dc26f240656bbe2029bd441d77c221f0ba4c70c94b29b5f17f0f6d08745a069",
    "0x108c19d15f9446f744d0f110405d3856d6cc3bda6c4d537663729f5257628417",
];

/// Valor e(G1, G2) de BLS12-381, mismo orden de coeficientes.
const BLS12381_GT_KAT: [&str; 12] = [
    "0x1250ebd871fc0a92a7b2d83168d0d727272d441befa15c503dd8e90ce98db3e7b6d194f60839c508a84305aaca1789b6",
    "0x089a1c5b46e5110b86750ec6a532348868a84045483c92b7af5af689452eafabf1a8943e50439f1d59882a98eaa0170f",
    "0x1368bb445c7c2d209703f239689ce34c0378a68e72a6b3b216da0e22a5031b54ddff57309396b38c881c4c849ec23e87",
    "0x193502b86edb8857c273fa075a50512937e0794e1e65a7617c90d8bd66065b1fffe51d7a579973b1315021ec3c19934f",
    "0x01b2f522473d171391125ba84dc4007cfbf2f8da752f7c74185203fcca589ac719c34dffbbaad8431dad1c1fb597aaa5",
    "0x018107154f25a764bd3c79937a45b84546da634b8f6be14a8061e55cceba478b23f7dacaa35c8ca78beae9624045b4b6",
    "0x19f26337d205fb469cd6bd15c3d5a04dc88784fbb3d0b2dbdea54d43b2b73f2cbb12d58386a8703e0f948226e47ee89d",
    "0x06fba23eb7c5af0d9f80940ca771b6ffd5857baaf222eb95a7d2809d61bfe02e1bfd1b68ff02f0b8102ae1c2d5d5ab1a",
    "0x11b8b424cd48bf38fcef68083b0b0ec5c81a93b330ee1a677d0d15ff7b984e8978ef48881e32fac91b93b47333e2ba57",
    "0x03350f55a7aefcd3c31b4fcb6ce5771cc6a0e9786ab5973320c806ad360829107ba810c5a09ffdd9be2291a0c25a99a2",
    "0x04c581234d086a9902249b64728ffd21a189e87935a954051c7cdba7b3872629a4fafc05066245cb9108f0242d0fe3ef",
    "0x0f41e58663bf08cf068672cbd01a7ec73baca4d72ca93544deff686bfd6df543d48eaa24afe47e1efde449383b676631",
];


/// Valor e(G1, G2) de BLS12-377, mismo orden de coeficientes.
const BLS12377_GT_KAT: [&str; 12] = [
    "0x0010ae1dfaa372647a0252fce4ad088aee238a7d46cd94482627533ce9643e268a96f06a2ff6982e97003ad2939c195c",
    "0x018c985c5dbca4aef76a37ec508c5241036fce0e5ee7ab3d05d08a66567495837077462f003d9d6b00672f924139ec69",
    "0x00697581da4d1600bb9d1957582a5fae5d2f997d252e32f16b748cdac3503554e6ba303d765d96a7ae71a55a535315b4",
    "0x001f6ac66002283201f757d509808191dda62535c6f28ba47555e6b5733b409595785f5694b1dd75cfefdfc1cb02bedd",
    "0x000d44ba31b948e530e79e8437c3651e015af867cd292db9b9af0746724c650f82fad0b46c9cbb5bd603a8b475feb75f",
    "0x006cb3d6f246a56ab35755fa16549237e7c449470bd0b6c4eeaab420ffaf5e4ca347345c5930a5d908ccc2c469a84124",
    "0x01a51b2ce4472560faeb9d3b254dcda6519fbaa1c9be0296c90f7eeacd6f7ff5213e26e30e9e76763d18fb872862f6c8",
    "0x00a84d70c307cd008990bbef5c73b4b36537e60a7442f29b3ad914d84c8e805498ad4424de53bbd75b2937141c8600a0",
    "0x01746e405ff80fb977351296e6adbc3290a5f5e069173fd5a37c354f9ff689ea15b2717a9122b41b107fd460054acd92",
    "0x0092b3d94b913799e335697bc805487ae0f36e37891ca1494c9763187e795c884a67d78e632f3693d3ea2ce57bd6d912",
    "0x006ba3bce1851c4b464a6cc6f354c8670e12406376e552c3933ced9a1814a9a911ee242b681e30e32ed82dc66b7b01ff",
    "0x008a7cf2513b2e8c6ab6cd969be7ee79ebcc5d5466bee0dfff256db8f0483d0e0b778a66f0e2aa3ecd6d19be9d43a627",
];

fn gt_coefficients<P, const N: usize>(value: &Fp12<P, N>) -> [obsidian_core_math::prelude::FieldElement<P, N>; 12]
where
    P: FieldParameters<N> + obsidian_core_math::prelude::TowerParameters<N>,
{
    [
        value.c0.c0.c0, value.c0.c0.c1, value.c0.c1.c0, value.c0.c1.c1, value.c0.c2.c0,
        value.c0.c2.c1, value.c1.c0.c0, value.c1.c0.c1, value.c1.c1.c0, value.c1.c1.c1,
        value.c1.c2.c0, value.c1.c2.c1,
    ]
}

/// Exponenciación de GT por un escalar público.
fn gt_pow<P, const N: usize>(base: &Fp12<P, N>, exponent: &BigInt<4>) -> Fp12<P, N>
where
    P: obsidian_core_math::prelude::TowerParameters<N>,
{
    let mut accumulator = Fp12::one();
    for bit_index in (0..exponent.bit_length_vartime()).rev() {
        accumulator = accumulator.square_modular();
        if exponent.bit(bit_index) == 1 {
            accumulator = accumulator.multiply_modular(base);
        }
    }
    accumulator
}

#[test]
fn certify_gt_known_answer_vectors() {
    println!("\n💠 [INICIO]: Vectores de GT e(G1, G2)...");
    let bn = optimal_ate_pairing::<Bn254Fp, 4>(
        &AffinePoint::<Bn254G1>::generator(),
        &AffinePoint::<Bn254G2>::generator(),
    );
    for (coefficient, expected) in gt_coefficients(&bn).iter().zip(BN254_GT_KAT.iter()) {
        assert_eq!(&coefficient.to_hex(), expected, "L2_PAIRING_FAULT: KAT BN254 divergente");
    }
    let bls = optimal_ate_pairing::<Bls12381Fp, 6>(
        &AffinePoint::<Bls12381G1>::generator(),
        &AffinePoint::<Bls12381G2>::generator(),
    );
    for (coefficient, expected) in gt_coefficients(&bls).iter().zip(BLS12381_GT_KAT.iter()) {
        assert_eq!(&coefficient.to_hex(), expected, "L2_PAIRING_FAULT: KAT BLS divergente");
    }
    let bls377 = optimal_ate_pairing::<Bls12377Fp, 6>(
        &AffinePoint::<Bls12377G1>::generator(),
        &AffinePoint::<Bls12377G2>::generator(),
    );
    for (coefficient, expected) in gt_coefficients(&bls377).iter().zip(BLS12377_GT_KAT.iter()) {
        assert_eq!(&coefficient.to_hex(), expected, "L2_PAIRING_FAULT: KAT BLS12-377 divergente");
    }
    println!("   ✅ Los tres valores de GT bit-perfect contra los vectores.");
}

fn certify_bilinearity<P, const N: usize>(label: &str)
where
    P: PairingParameters<N>,
{
    println!("   🧪 Fase: bilinealidad sobre {label}...");
    let g1 = ProjectivePoint::<P::G1>::generator();
    let g2 = ProjectivePoint::<P::G2>::generator();
    let a = BigInt::<4>::from_word(0x5eed_cafe);
    let b = BigInt::<4>::from_word(0xbeef_1234);
    let mut ab = BigInt::<8>::ZERO;
    obsidian_core_math::prelude::multiply_full(&mut ab, &a, &b);
    let mut ab_low = BigInt::<4>::ZERO;
    ab_low.limbs.copy_from_slice(&ab.limbs[..4]);

    let to_affine_1 = |point: &ProjectivePoint<P::G1>| {
        WeierstrassEngine::<P::G1>::affine_from_projective(point)
    };
    let to_affine_2 = |point: &ProjectivePoint<P::G2>| {
        WeierstrassEngine::<P::G2>::affine_from_projective(point)
    };

    let base = optimal_ate_pairing::<P, N>(&to_affine_1(&g1), &to_affine_2(&g2));
    let left = optimal_ate_pairing::<P, N>(
        &to_affine_1(&scalar_mul_double_add_vartime(&g1, &a)),
        &to_affine_2(&scalar_mul_double_add_vartime(&g2, &b)),
    );
    assert_eq!(
        left,
        gt_pow(&base, &ab_low),
        "L2_PAIRING_FAULT[{label}]: e([a]P, [b]Q) != e(P, Q)^(a b)"
    );

    // e([2]P, Q) = e(P, [2]Q) = e(P, Q)^2.
    let two = BigInt::<4>::from_word(2);
    let doubled_left = optimal_ate_pairing::<P, N>(
        &to_affine_1(&WeierstrassEngine::<P::G1>::double(&g1)),
        &to_affine_2(&g2),
    );
    let doubled_right = optimal_ate_pairing::<P, N>(
        &to_affine_1(&g1),
        &to_affine_2(&WeierstrassEngine::<P::G2>::double(&g2)),
    );
    assert_eq!(doubled_left, doubled_right, "L2_PAIRING_FAULT[{label}]: simetría 2P / 2Q rota");
    assert_eq!(doubled_left, gt_pow(&base, &two), "L2_PAIRING_FAULT[{label}]: e^2 divergente");

    // No degeneración y neutralidad del infinito.
    assert!(!base.is_one().to_bool_vartime(), "L2_PAIRING_FAULT[{label}]: pairing degenerado");
    let with_infinity =
        optimal_ate_pairing::<P, N>(&AffinePoint::infinity(), &to_affine_2(&g2));
    assert!(with_infinity.is_one().to_bool_vartime());
    println!("      ✅ Contratos bilineales certificados.");
}

#[test]
fn certify_bilinearity_both_families() {
    println!("\n💠 [INICIO]: Contratos bilineales...");
    certify_bilinearity::<Bn254Fp, 4>("bn254");
    certify_bilinearity::<Bls12381Fp, 6>("bls12-381");
    certify_bilinearity::<Bls12377Fp, 6>("bls12-377");
    println!("   ✅ Familias BN y BLS certificadas (381 y 377).");
}

#[test]
fn certify_multi_pairing_accumulator() {
    println!("\n💠 [PROVING_GROUNDS]: Multi-pairing con acumulador compartido...");
    let g1 = ProjectivePoint::<Bls12381G1>::generator();
    let g2 = ProjectivePoint::<Bls12381G2>::generator();
    let scalars = [3u64, 7, 11];
    let mut g1_points = Vec::new();
    let mut g2_points = Vec::new();
    let mut expected = Fp12::one();
    for scalar in scalars {
        let p = WeierstrassEngine::<Bls12381G1>::affine_from_projective(
            &scalar_mul_double_add_vartime(&g1, &BigInt::<4>::from_word(scalar)),
        );
        let q = WeierstrassEngine::<Bls12381G2>::affine_from_projective(
            &scalar_mul_double_add_vartime(&g2, &BigInt::<4>::from_word(scalar + 1)),
        );
        expected = expected.multiply_modular(&optimal_ate_pairing::<Bls12381Fp, 6>(&p, &q));
        g1_points.push(p);
        g2_points.push(q);
    }
    let combined =
        multi_pairing::<Bls12381Fp, 6>(&g1_points, &g2_points).expect("ráfagas simétricas");
    assert_eq!(combined, expected, "L2_PAIRING_FAULT: multi != producto de individuales");

    // Desbalance de ráfagas: estado explícito.
    assert!(multi_pairing::<Bls12381Fp, 6>(&g1_points, &g2_points[..2]).is_err());
    println!("   ✅ Acumulador compartido == producto de pairings.");
}
