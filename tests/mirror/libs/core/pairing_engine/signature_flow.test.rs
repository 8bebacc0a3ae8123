// [tests/mirror/libs/core/pairing_engine/signature_flow.test.rs]
/*!
 * =================================================================
 * APARATO: SIGNATURE FLOW CERTIFIER (V6.0 - END TO END)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-PAIRING
 * RESPONSABILIDAD: FLUJO FIRMA / VERIFICACIÓN SOBRE EL PAIRING
 *
 * El flujo BLS minimalista consume únicamente los contratos del
 * núcleo: sk -> pk = [sk] G2, sig = [sk] H(m) y la verificación
 * e(sig, G2) == e(H(m), pk). El protocolo exterior (agregación,
 * formatos de clave) es un colaborador externo.
 * =================================================================
 */

use obsidian_core_curve::prelude::*;
use obsidian_core_math::prelude::{reduce_wide, BigInt, Bls12381Fp};
use obsidian_core_pairing::prelude::*;
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Mensaje -> punto de G1 determinista para el flujo (el pipeline
/// hash-to-curve completo se certifica en su propio espejo).
fn message_to_point(message: &[u8]) -> AffinePoint<Bls12381G1> {
    let mut wide = BigInt::<8>::ZERO;
    for (index, byte) in message.iter().enumerate().take(64) {
        wide.limbs[index / 8] |= (*byte as u64) << ((index % 8) * 8);
    }
    wide.limbs[7] |= 1 << 62;
    let mut scalar = BigInt::<4>::ZERO;
    reduce_wide(&mut scalar, &wide, &<Bls12381G1 as CurveParameters>::ORDER);
    WeierstrassEngine::<Bls12381G1>::affine_from_projective(&scalar_mul_double_add_vartime(
        &ProjectivePoint::<Bls12381G1>::generator(),
        &scalar,
    ))
}

fn keygen(randomness: &mut StdRng) -> (BigInt<4>, AffinePoint<Bls12381G2>) {
    let mut wide = BigInt::<8>::ZERO;
    for limb in wide.limbs[..4].iter_mut() {
        *limb = randomness.next_u64();
    }
    let mut secret = BigInt::<4>::ZERO;
    reduce_wide(&mut secret, &wide, &<Bls12381G2 as CurveParameters>::ORDER);
    let public = WeierstrassEngine::<Bls12381G2>::affine_from_projective(&scalar_mul_generic(
        &ProjectivePoint::<Bls12381G2>::generator(),
        &secret,
        <Bls12381G2 as CurveParameters>::ORDER_BITS,
    ));
    (secret, public)
}

fn sign(secret: &BigInt<4>, message: &[u8]) -> AffinePoint<Bls12381G1> {
    let hashed = message_to_point(message);
    WeierstrassEngine::<Bls12381G1>::affine_from_projective(&scalar_mul_generic(
        &WeierstrassEngine::<Bls12381G1>::projective_from_affine(&hashed),
        secret,
        <Bls12381G1 as CurveParameters>::ORDER_BITS,
    ))
}

fn verify(
    public: &AffinePoint<Bls12381G2>,
    message: &[u8],
    signature: &AffinePoint<Bls12381G1>,
) -> bool {
    let generator = AffinePoint::<Bls12381G2>::generator();
    let left = optimal_ate_pairing::<Bls12381Fp, 6>(signature, &generator);
    let right = optimal_ate_pairing::<Bls12381Fp, 6>(&message_to_point(message), public);
    left == right
}

#[test]
fn certify_sign_verify_roundtrip() {
    println!("\n💠 [INICIO]: Flujo firma / verificación (3 identidades)...");
    let mut randomness = StdRng::seed_from_u64(121);
    for message in [b"obsidian pairing flow".as_slice(), b"".as_slice(), b"x".as_slice()] {
        let (secret, public) = keygen(&mut randomness);
        let signature = sign(&secret, message);
        assert!(
            verify(&public, message, &signature),
            "L2_SIGNATURE_FAULT: la firma legítima no verifica"
        );
    }
    println!("   ✅ Firmas legítimas verificadas.");
}

#[test]
fn certify_forgery_rejection() {
    println!("\n💠 [PROVING_GROUNDS]: Rechazo de manipulaciones...");
    let mut randomness = StdRng::seed_from_u64(122);
    let (secret, public) = keygen(&mut randomness);
    let (foreign_secret, foreign_public) = keygen(&mut randomness);
    let message = b"pago de 10 btc";
    let signature = sign(&secret, message);

    // Mensaje alterado.
    assert!(!verify(&public, b"pago de 99 btc", &signature), "L2_SIGNATURE_FAULT: mensaje alterado aceptado");
    // Clave ajena.
    assert!(!verify(&foreign_public, message, &signature), "L2_SIGNATURE_FAULT: clave ajena aceptada");
    // Firma ajena.
    let foreign_signature = sign(&foreign_secret, message);
    assert!(!verify(&public, message, &foreign_signature), "L2_SIGNATURE_FAULT: firma ajena aceptada");
    // Firma negada.
    assert!(!verify(&public, message, &signature.negate()), "L2_SIGNATURE_FAULT: firma negada aceptada");
    println!("   ✅ Cuatro manipulaciones rechazadas.");
}
