// [tests/mirror/libs/core/curve_engine/codec_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: WIRE CODEC CERTIFIER (V11.0 - HOSTILE BYTES)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-GEOMETRY
 * RESPONSABILIDAD: CÓDECS COMPRIMIDOS, BANDERWAGON Y ESCALARES
 * =================================================================
 */

use obsidian_core_curve::prelude::*;
use obsidian_core_math::prelude::BigInt;
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Dieciséis encodings de la cadena de duplicaciones del generador
/// Banderwagon, fijados como vectores de regresión del códec.
const BANDERWAGON_DOUBLING_KATS: [&str; 16] = [
    "4a2c7486fd924882bf02c6908de395122843e3e05264d7991e18e7985dad51e9",
    "43aa74ef706605705989e8fd38df46873b7eae5921fbed115ac9d937399ce4d5",
    "5e5f550494159f38aa54d2ed7f11a7e93e4968617990445cc93ac8e59808c126",
    "0e7e3748db7c5c999a7bcd93d71d671f1f40090423792266f94cb27ca43fce5c",
    "14ddaa48820cb6523b9ae5fe9fe257cbbd1f3d598a28e670a40da5d1159d864a",
    "6989d1c82b2d05c74b62fb0fbdf8843adae62ff720d370e209a7b84e14548a7d",
    "26b8df6fa414bf348a3dc780ea53b70303ce49f3369212dec6fbe4b349b832bf",
    "37e46072db18f038f2cc7d3d5b5d1374c0eb86ca46f869d6a95fc2fb092c0d35",
    "2c1ce64f26e1c772282a6633fac7ca73067ae820637ce348bb2c8477d228dc7d",
    "297ab0f5a8336a7a4e2657ad7a33a66e360fb6e50812d4be3326fab73d6cee07",
    "5b285811efa7a965bd6ef5632151ebf399115fcc8f5b9b8083415ce533cc39ce",
    "1f939fa2fd457b3effb82b25d3fe8ab965f54015f108f8c09d67e696294ab626",
    "3088dcb4d3f4bacd706487648b239e0be3072ed2059d981fe04ce6525af6f1b8",
    "35fbc386a16d0227ff8673bc3760ad6b11009f749bb82d4facaea67f58fc60ed",
    "00f29b4f3255e318438f0a31e058e4c081085426adb0479f14c64985d0b956e0",
    "3fa4384b2fa0ecc3c0582223602921daaa893a97b64bdf94dcaa504e8b7b9e5f",
];

fn random_g1(randomness: &mut StdRng) -> AffinePoint<Bls12381G1> {
    WeierstrassEngine::<Bls12381G1>::affine_from_projective(&scalar_mul_double_add_vartime(
        &ProjectivePoint::<Bls12381G1>::generator(),
        &BigInt::<4>::from_word(randomness.next_u64() | 1),
    ))
}

fn random_g2(randomness: &mut StdRng) -> AffinePoint<Bls12381G2> {
    WeierstrassEngine::<Bls12381G2>::affine_from_projective(&scalar_mul_double_add_vartime(
        &ProjectivePoint::<Bls12381G2>::generator(),
        &BigInt::<4>::from_word(randomness.next_u64() | 1),
    ))
}

#[test]
fn certify_g1_codec_roundtrips() {
    println!("\n💠 [INICIO]: Ida y vuelta del códec G1 (ráfaga 20)...");
    let mut randomness = StdRng::seed_from_u64(91);
    for _ in 0..20 {
        let point = random_g1(&mut randomness);
        let mut compressed = [0u8; 48];
        serialize_g1_compressed(&point, &mut compressed);
        let decoded = deserialize_g1_compressed(&compressed).expect("roundtrip comprimido");
        assert!(decoded.equals(&point).to_bool_vartime(), "L1_CODEC_FAULT: G1 comprimido");

        let mut uncompressed = [0u8; 96];
        serialize_g1_uncompressed(&point, &mut uncompressed);
        let decoded = deserialize_g1_uncompressed(&uncompressed).expect("roundtrip plano");
        assert!(decoded.equals(&point).to_bool_vartime(), "L1_CODEC_FAULT: G1 plano");
    }
    // Infinito canónico.
    let mut compressed = [0u8; 48];
    serialize_g1_compressed(&AffinePoint::infinity(), &mut compressed);
    assert_eq!(compressed[0], 0b1100_0000);
    let decoded = deserialize_g1_compressed(&compressed).expect("infinito");
    assert!(decoded.is_infinity.to_bool_vartime());
    assert_eq!(DeserializationStatus::from_infinity_flag(true), DeserializationStatus::PointAtInfinity);
    println!("   ✅ Códec G1 certificado (48 y 96 bytes).");
}

#[test]
fn certify_g2_codec_roundtrips() {
    println!("\n💠 [INICIO]: Ida y vuelta del códec G2 (ráfaga 12)...");
    let mut randomness = StdRng::seed_from_u64(92);
    for _ in 0..12 {
        let point = random_g2(&mut randomness);
        let mut compressed = [0u8; 96];
        serialize_g2_compressed(&point, &mut compressed);
        let decoded = deserialize_g2_compressed(&compressed).expect("roundtrip comprimido");
        assert!(decoded.equals(&point).to_bool_vartime(), "L1_CODEC_FAULT: G2 comprimido");

        let mut uncompressed = [0u8; 192];
        serialize_g2_uncompressed(&point, &mut uncompressed);
        let decoded = deserialize_g2_uncompressed(&uncompressed).expect("roundtrip plano");
        assert!(decoded.equals(&point).to_bool_vartime(), "L1_CODEC_FAULT: G2 plano");
    }
    println!("   ✅ Códec G2 certificado (96 y 192 bytes, signo sobre c1).");
}

#[test]
fn certify_hostile_byte_rejections() {
    println!("\n💠 [PROVING_GROUNDS]: Bytes hostiles...");
    // Longitud ilegal.
    assert_eq!(
        deserialize_g1_compressed(&[0u8; 47]).unwrap_err(),
        DeserializationStatus::InvalidEncoding
    );
    // Falta el bit de compresión.
    let mut bytes = [0u8; 48];
    bytes[0] = 0x1F;
    assert_eq!(
        deserialize_g1_compressed(&bytes).unwrap_err(),
        DeserializationStatus::InvalidEncoding
    );
    // Infinito con basura residual.
    let mut bytes = [0u8; 48];
    bytes[0] = 0b1100_0000;
    bytes[47] = 1;
    assert_eq!(
        deserialize_g1_compressed(&bytes).unwrap_err(),
        DeserializationStatus::InvalidEncoding
    );
    // Abscisa >= p (el módulo mismo).
    let mut bytes = [0u8; 48];
    let modulus_hex = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";
    bytes.copy_from_slice(&hex::decode(modulus_hex).expect("hex"));
    bytes[0] |= 0b1000_0000;
    assert_eq!(
        deserialize_g1_compressed(&bytes).unwrap_err(),
        DeserializationStatus::CoordinateGreaterThanOrEqualModulus
    );
    // Abscisa sin ordenada racional.
    let mut bytes = [0u8; 48];
    bytes[0] = 0b1000_0000;
    bytes[47] = 5;
    // x = 5 no produce cuadrado sobre BLS12-381: y^2 = 129.
    if let Err(status) = deserialize_g1_compressed(&bytes) {
        assert!(
            matches!(
                status,
                DeserializationStatus::PointNotOnCurve | DeserializationStatus::PointNotInSubgroup
            ),
            "L1_CODEC_FAULT: estado de rechazo inesperado"
        );
    }
    println!("   ✅ Rechazos con estados explícitos certificados.");
}

#[test]
fn certify_banderwagon_doubling_chain() {
    println!("\n💠 [INICIO]: Cadena de duplicaciones Banderwagon (16 KATs)...");
    let mut point = EdwardsProjectivePoint::<Bandersnatch>::generator();
    for (index, expected_hex) in BANDERWAGON_DOUBLING_KATS.iter().enumerate() {
        let mut encoding = [0u8; 32];
        serialize_banderwagon(&point, &mut encoding);
        assert_eq!(
            hex::encode(encoding),
            *expected_hex,
            "L1_CODEC_FAULT: encoding divergente en la duplicación {index}"
        );
        // Ida y vuelta en el cociente.
        let decoded = deserialize_banderwagon(&encoding).expect("wagon roundtrip");
        assert!(
            banderwagon_equals(&decoded, &point).to_bool_vartime(),
            "L1_CODEC_FAULT: clase del cociente divergente"
        );
        point = EdwardsEngine::<Bandersnatch>::double(&point);
    }
    println!("   ✅ Dieciséis encodings bit-perfect.");
}

#[test]
fn certify_banderwagon_quotient_identification() {
    println!("\n💠 [PROVING_GROUNDS]: Identificación del coset {{P, P + t}}...");
    let generator = EdwardsProjectivePoint::<Bandersnatch>::generator();
    // P + t = (-x, -y): mismo encoding que P.
    let torsion_partner = EdwardsProjectivePoint::<Bandersnatch> {
        x: generator.x.negate_modular(),
        y: generator.y.negate_modular(),
        z: generator.z,
    };
    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    serialize_banderwagon(&generator, &mut left);
    serialize_banderwagon(&torsion_partner, &mut right);
    assert_eq!(left, right, "L1_CODEC_FAULT: el coset no colapsa en el códec");
    assert!(banderwagon_equals(&generator, &torsion_partner).to_bool_vartime());
    // Rechazo de abscisas fuera del módulo.
    let rejected = deserialize_banderwagon(&[0xFFu8; 32]).unwrap_err();
    assert_eq!(rejected, DeserializationStatus::CoordinateGreaterThanOrEqualModulus);
    println!("   ✅ Cociente y rechazos certificados.");
}

#[test]
fn certify_scalar_codec() {
    println!("\n💠 [PROVING_GROUNDS]: Códec de escalares Little-Endian...");
    let order = <Bls12381G1 as CurveParameters>::ORDER;
    let mut randomness = StdRng::seed_from_u64(93);
    for _ in 0..50 {
        let scalar = BigInt::<4>::from_word(randomness.next_u64());
        let mut bytes = [0u8; 32];
        serialize_scalar_le(&scalar, &mut bytes);
        assert_eq!(deserialize_scalar_le(&bytes, &order).expect("scalar"), scalar);
    }
    // El orden mismo se rechaza.
    let mut bytes = [0u8; 32];
    order.write_bytes_le(&mut bytes);
    assert_eq!(
        deserialize_scalar_le(&bytes, &order).unwrap_err(),
        DeserializationStatus::CoordinateGreaterThanOrEqualModulus
    );
    assert_eq!(
        deserialize_scalar_le(&[0u8; 31], &order).unwrap_err(),
        DeserializationStatus::InvalidEncoding
    );
    println!("   ✅ Escalares certificados con rechazo en el orden.");
}

/**
 * Escenario sembrado: multiplicación escalar en BLS12-381 G1 con el
 * escalar nominal del vector, verificada contra las coordenadas y el
 * encoding comprimido esperados.
 */
#[test]
fn certify_seeded_scalar_mul_vector() {
    println!("\n💠 [PROVING_GROUNDS]: Vector sembrado [k] G sobre BLS12-381...");
    let scalar = BigInt::<4>::from_hex_vartime(
        "0xf7e60a832eb77ac47374bc93251360d6c81c21add62767ff816caf11a20d8db",
    )
    .expect("escalar del vector");
    let result = scalar_mul_generic(
        &ProjectivePoint::<Bls12381G1>::generator(),
        &scalar,
        <Bls12381G1 as CurveParameters>::ORDER_BITS,
    );
    let affine = WeierstrassEngine::<Bls12381G1>::affine_from_projective(&result);
    assert_eq!(
        affine.x.to_hex(),
        "0x0649b7b2cd1166bd5fa3a027417cbb0e3832983dd381d3a1a209821c56e7c1d786b2fb3a6a610779d7c74e9bcb39b212"
    );
    assert_eq!(
        affine.y.to_hex(),
        "0x17fdd62acc5f7c00cef3c9d34814e1abd7a8f48e72fa06fd61004469147b96a1dc12220f3f5dc34d72caf2d85af45a0c"
    );
    let mut compressed = [0u8; 48];
    serialize_g1_compressed(&affine, &mut compressed);
    assert_eq!(
        hex::encode(compressed),
        "a649b7b2cd1166bd5fa3a027417cbb0e3832983dd381d3a1a209821c56e7c1d786b2fb3a6a610779d7c74e9bcb39b212"
    );
    println!("   ✅ Coordenadas y encoding comprimido bit-perfect.");
}
