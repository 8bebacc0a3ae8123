// [tests/mirror/libs/domain/hash_to_curve/map_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: SVDW MAP CERTIFIER (V8.0 - CURVE LANDING)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-H2C
 * RESPONSABILIDAD: PUNTOS SOBRE LA CURVA Y EN EL SUBGRUPO PRIMO
 * =================================================================
 */

use obsidian_core_curve::prelude::*;
use obsidian_core_math::prelude::{FieldElement, Fp2};
use obsidian_domain_h2c::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

const PIPELINE_DST: &[u8] = b"OBSIDIAN-V01-CS01-with-BLS12381G1_XMD:SHA-256_SVDW_RO_";

fn certify_map_lands_on_curve<C>(label: &str, seed: u64)
where
    C: SvdwParameters,
{
    println!("   🧪 Fase: mapa SVDW sobre {label}...");
    let mut randomness = StdRng::seed_from_u64(seed);
    for _ in 0..30 {
        let u = sample_field::<C>(&mut randomness);
        let mapped = map_to_curve_svdw::<C>(&u);
        assert!(
            mapped.is_on_curve().to_bool_vartime(),
            "L3_SVDW_FAULT[{label}]: el mapa abandonó la curva"
        );
        assert!(!mapped.is_infinity.to_bool_vartime());
        // Determinismo del mapa puro.
        let remapped = map_to_curve_svdw::<C>(&u);
        assert!(mapped.equals(&remapped).to_bool_vartime());
    }
    println!("      ✅ Treinta aterrizajes certificados.");
}

fn sample_field<C: CurveParameters>(randomness: &mut StdRng) -> C::Field {
    // Muestreo por acumulación de la unidad: suficiente para cubrir
    // las tres ramas candidatas del mapa.
    let mut value = C::Field::field_one();
    for _ in 0..8 {
        let word = rand::RngCore::next_u64(randomness);
        let mut step = C::Field::field_one();
        for _ in 0..(word % 23) {
            step = step.add_modular(&C::Field::field_one());
        }
        value = value.multiply_modular(&step).add_modular(&step);
    }
    value
}

#[test]
fn certify_svdw_all_catalogs() {
    println!("\n💠 [INICIO]: Mapa universal SVDW por catálogo...");
    certify_map_lands_on_curve::<Bn254G1>("bn254-g1", 131);
    certify_map_lands_on_curve::<Bls12381G1>("bls12-381-g1", 132);
    certify_map_lands_on_curve::<Secp256k1>("secp256k1", 133);
    certify_map_lands_on_curve::<Bn254G2>("bn254-g2", 134);
    certify_map_lands_on_curve::<Bls12381G2>("bls12-381-g2", 135);
    certify_map_lands_on_curve::<Bls12377G1>("bls12-377-g1", 136);
    certify_map_lands_on_curve::<Bls12377G2>("bls12-377-g2", 137);
    println!("   ✅ Siete catálogos certificados (Fp y Fp2).");
}

#[test]
fn certify_hash_to_curve_pipeline_g1() {
    println!("\n💠 [INICIO]: Pipeline completo sobre BLS12-381 G1...");
    for message in [b"".as_slice(), b"abc".as_slice(), b"obsidian".as_slice()] {
        let point = hash_to_curve::<Bls12381G1>(message, PIPELINE_DST).expect("pipeline");
        let affine = WeierstrassEngine::<Bls12381G1>::affine_from_projective(&point);
        assert!(affine.is_on_curve().to_bool_vartime(), "L3_H2C_FAULT: fuera de la curva");
        assert!(
            is_in_bls12381_g1_subgroup_vartime(&point),
            "L3_H2C_FAULT: fuera del subgrupo primo"
        );
        // Determinismo estricto en (msg, dst).
        let replay = hash_to_curve::<Bls12381G1>(message, PIPELINE_DST).expect("pipeline");
        assert!(replay.equals(&point).to_bool_vartime(), "L3_H2C_FAULT: no determinista");
        // La etiqueta separa dominios.
        let other = hash_to_curve::<Bls12381G1>(message, b"OBSIDIAN-OTHER-DST").expect("pipeline");
        assert!(!other.equals(&point).to_bool_vartime(), "L3_H2C_FAULT: dominios mezclados");
    }
    println!("   ✅ Pipeline determinista hacia el subgrupo primo.");
}

#[test]
fn certify_hash_to_curve_pipeline_g2() {
    println!("\n💠 [PROVING_GROUNDS]: Pipeline sobre el twist G2...");
    let point = hash_to_curve::<Bls12381G2>(b"twist landing", PIPELINE_DST).expect("pipeline");
    assert!(
        is_in_bls12381_g2_subgroup_vartime(&point),
        "L3_H2C_FAULT: el twist no aterrizó en el subgrupo"
    );
    let bn_point = hash_to_curve::<Bn254G2>(b"twist landing", PIPELINE_DST).expect("pipeline");
    assert!(
        is_in_bn254_g2_subgroup_vartime(&bn_point),
        "L3_H2C_FAULT: el twist BN no aterrizó en el subgrupo"
    );
    let p377 = hash_to_curve::<Bls12377G2>(b"twist landing", PIPELINE_DST).expect("pipeline");
    assert!(
        is_in_bls12377_g2_subgroup_vartime(&p377),
        "L3_H2C_FAULT: el twist 377 no aterrizó en el subgrupo"
    );
    println!("   ✅ Twists certificados tras la limpieza de cofactor.");
}

#[test]
fn certify_encode_to_curve_variant() {
    println!("\n💠 [PROVING_GROUNDS]: Variante encode_to_curve...");
    let point = encode_to_curve::<Bn254G1>(b"single map", PIPELINE_DST).expect("encode");
    let affine = WeierstrassEngine::<Bn254G1>::affine_from_projective(&point);
    assert!(affine.is_on_curve().to_bool_vartime());
    assert!(is_in_subgroup_generic_vartime(&point));
    println!("   ✅ Mapa único certificado.");
}

#[test]
fn certify_hash_to_field_stride() {
    println!("\n💠 [PROVING_GROUNDS]: Anchos de muestreo de hash_to_field...");
    // 254 bits -> 48 bytes por elemento; 381 bits -> 64.
    assert_eq!(
        <FieldElement<obsidian_core_math::prelude::Bn254Fp, 4> as HashableFieldElement>::UNIFORM_BYTE_LENGTH,
        48
    );
    assert_eq!(
        <FieldElement<obsidian_core_math::prelude::Bls12381Fp, 6> as HashableFieldElement>::UNIFORM_BYTE_LENGTH,
        64
    );
    assert_eq!(
        <Fp2<obsidian_core_math::prelude::Bls12381Fp, 6> as HashableFieldElement>::UNIFORM_BYTE_LENGTH,
        128
    );
    let elements = hash_to_field::<FieldElement<obsidian_core_math::prelude::Bn254Fp, 4>>(
        b"stride", b"dst", 2,
    )
    .expect("hash_to_field");
    assert_eq!(elements.len(), 2);
    assert!(!elements[0].equals(&elements[1]).to_bool_vartime());
    println!("   ✅ ceil((bits + 128) / 8) certificado.");
}
