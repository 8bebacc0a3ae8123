// [libs/core/curve-engine/src/codec.rs]
/*!
 * =================================================================
 * APARATO: POINT CODEC ENGINE (V26.0 - WIRE SOVEREIGN)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: CÓDECS COMPRIMIDOS, NO COMPRIMIDOS Y BANDERWAGON
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FLAG BITS: Los tres bits altos del primer byte codifican
 *    (comprimido, infinito, signo de y); el signo es "y
 *    lexicográficamente mayor que -y".
 * 2. HOSTILE BYTES: Cada rechazo es un estado explícito; jamás pánico
 *    sobre entrada no confiable.
 * 3. BANDERWAGON: 32 bytes de abscisa con la raíz lexicográficamente
 *    mayor implícita; la deserialización verifica pertenencia a la
 *    curva y al cociente del subgrupo de orden 2.
 * =================================================================
 */

use crate::catalog::bandersnatch::Bandersnatch;
use crate::catalog::bls12_381::{Bls12381G1, Bls12381G2};
use crate::edwards::{EdwardsAffinePoint, EdwardsEngine, EdwardsProjectivePoint};
use crate::errors::DeserializationStatus;
use crate::subgroup::{is_in_bls12381_g1_subgroup_vartime, is_in_bls12381_g2_subgroup_vartime};
use crate::traits::{CurveParameters, EdwardsParameters};
use crate::weierstrass::{AffinePoint, WeierstrassEngine};
use obsidian_core_math::prelude::{
    BigInt, Bls12381Fp, Bls12381Fr, FieldElement, FieldParameters, Fp2, SecretBool,
};
use tracing::instrument;

/// Bit de compresión (bit 7 del primer byte).
const FLAG_COMPRESSED: u8 = 0b1000_0000;
/// Bit de infinito (bit 6).
const FLAG_INFINITY: u8 = 0b0100_0000;
/// Bit de signo de y (bit 5).
const FLAG_SIGN: u8 = 0b0010_0000;

/// Bytes de un Fp de BLS12-381.
const BLS_FIELD_BYTES: usize = 48;

type BlsFp = FieldElement<Bls12381Fp, 6>;
type BlsFp2 = Fp2<Bls12381Fp, 6>;

// =================================================================
// CÓDEC DE ESCALARES
// =================================================================

/**
 * Escalar Little-Endian de 32 bytes, rechazado si alcanza el orden
 * del grupo.
 *
 * # Errors:
 * 'InvalidEncoding' por longitud; 'CoordinateGreaterThanOrEqualModulus'
 * por desborde del orden.
 */
pub fn deserialize_scalar_le(
    bytes: &[u8],
    group_order: &BigInt<4>,
) -> Result<BigInt<4>, DeserializationStatus> {
    if bytes.len() != 32 {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    let decoded =
        BigInt::<4>::read_bytes_le(bytes).map_err(|_| DeserializationStatus::InvalidEncoding)?;
    if decoded.compare_vartime(group_order) != core::cmp::Ordering::Less {
        return Err(DeserializationStatus::CoordinateGreaterThanOrEqualModulus);
    }
    Ok(decoded)
}

/// Escalar Little-Endian de 32 bytes hacia el buffer destino.
pub fn serialize_scalar_le(scalar: &BigInt<4>, output: &mut [u8; 32]) {
    scalar.write_bytes_le(output);
}

// =================================================================
// CÓDEC BLS12-381 G1
// =================================================================

/// Signo lexicográfico de una ordenada Fp2 (decide c1, con c0 de desempate).
fn fp2_is_lexicographically_largest(value: &BlsFp2) -> SecretBool {
    let c1_largest = value.c1.is_lexicographically_largest();
    let c1_zero = value.c1.is_zero();
    c1_largest.or(c1_zero.and(value.c0.is_lexicographically_largest()))
}

/**
 * Serialización comprimida de G1: 48 bytes con los tres bits de
 * bandera sobre la abscisa Big-Endian.
 */
pub fn serialize_g1_compressed(point: &AffinePoint<Bls12381G1>, output: &mut [u8; 48]) {
    if point.is_infinity.to_bool_vartime() {
        output.fill(0);
        output[0] = FLAG_COMPRESSED | FLAG_INFINITY;
        return;
    }
    point.x.write_canonical_bytes_be(output);
    let mut flags = FLAG_COMPRESSED;
    if point.y.is_lexicographically_largest().to_bool_vartime() {
        flags |= FLAG_SIGN;
    }
    output[0] |= flags;
}

/**
 * Deserialización comprimida de G1 con verificación de curva y
 * subgrupo.
 *
 * # Errors:
 * Los estados de rechazo del catálogo §6; el infinito retorna el punto
 * neutro ('from_infinity_flag' reconstruye el estado completo).
 */
#[instrument(level = "debug", skip_all)]
pub fn deserialize_g1_compressed(
    bytes: &[u8],
) -> Result<AffinePoint<Bls12381G1>, DeserializationStatus> {
    if bytes.len() != BLS_FIELD_BYTES {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    let flags = bytes[0];
    if flags & FLAG_COMPRESSED == 0 {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    if flags & FLAG_INFINITY != 0 {
        // El resto de los bytes debe ser nulo.
        if flags & !(FLAG_COMPRESSED | FLAG_INFINITY) != 0 || bytes[1..].iter().any(|b| *b != 0) {
            return Err(DeserializationStatus::InvalidEncoding);
        }
        return Ok(AffinePoint::infinity());
    }
    let mut x_bytes = [0u8; BLS_FIELD_BYTES];
    x_bytes.copy_from_slice(bytes);
    x_bytes[0] &= !(FLAG_COMPRESSED | FLAG_INFINITY | FLAG_SIGN);
    let x_integer = BigInt::<6>::read_bytes_be(&x_bytes)
        .map_err(|_| DeserializationStatus::InvalidEncoding)?;
    if x_integer.compare_vartime(&Bls12381Fp::MODULUS) != core::cmp::Ordering::Less {
        return Err(DeserializationStatus::CoordinateGreaterThanOrEqualModulus);
    }
    let x = BlsFp::from_big_int(&x_integer);
    let mut y = x
        .square_modular()
        .multiply_modular(&x)
        .add_modular(&<Bls12381G1 as CurveParameters>::COEFF_B);
    if !y.sqrt_if_square().to_bool_vartime() {
        return Err(DeserializationStatus::PointNotOnCurve);
    }
    let wants_largest = flags & FLAG_SIGN != 0;
    let is_largest = y.is_lexicographically_largest().to_bool_vartime();
    if wants_largest != is_largest {
        y = y.negate_modular();
    }
    let point = AffinePoint::from_coordinates(x, y);
    let projective = WeierstrassEngine::<Bls12381G1>::projective_from_affine(&point);
    if !is_in_bls12381_g1_subgroup_vartime(&projective) {
        return Err(DeserializationStatus::PointNotInSubgroup);
    }
    Ok(point)
}

/**
 * Serialización no comprimida de G1: 96 bytes (x, y) con bandera de
 * infinito y sin bit de signo.
 */
pub fn serialize_g1_uncompressed(point: &AffinePoint<Bls12381G1>, output: &mut [u8; 96]) {
    if point.is_infinity.to_bool_vartime() {
        output.fill(0);
        output[0] = FLAG_INFINITY;
        return;
    }
    let (x_half, y_half) = output.split_at_mut(BLS_FIELD_BYTES);
    point.x.write_canonical_bytes_be(x_half);
    point.y.write_canonical_bytes_be(y_half);
}

/**
 * Deserialización no comprimida de G1 con verificación de curva y
 * subgrupo.
 */
pub fn deserialize_g1_uncompressed(
    bytes: &[u8],
) -> Result<AffinePoint<Bls12381G1>, DeserializationStatus> {
    if bytes.len() != 2 * BLS_FIELD_BYTES {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    let flags = bytes[0];
    if flags & FLAG_COMPRESSED != 0 {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    if flags & FLAG_INFINITY != 0 {
        if bytes[1..].iter().any(|b| *b != 0) {
            return Err(DeserializationStatus::InvalidEncoding);
        }
        return Ok(AffinePoint::infinity());
    }
    let x_integer = BigInt::<6>::read_bytes_be(&bytes[..BLS_FIELD_BYTES])
        .map_err(|_| DeserializationStatus::InvalidEncoding)?;
    let y_integer = BigInt::<6>::read_bytes_be(&bytes[BLS_FIELD_BYTES..])
        .map_err(|_| DeserializationStatus::InvalidEncoding)?;
    for integer in [&x_integer, &y_integer] {
        if integer.compare_vartime(&Bls12381Fp::MODULUS) != core::cmp::Ordering::Less {
            return Err(DeserializationStatus::CoordinateGreaterThanOrEqualModulus);
        }
    }
    let point = AffinePoint::from_coordinates(
        BlsFp::from_big_int(&x_integer),
        BlsFp::from_big_int(&y_integer),
    );
    if !point.is_on_curve().to_bool_vartime() {
        return Err(DeserializationStatus::PointNotOnCurve);
    }
    let projective = WeierstrassEngine::<Bls12381G1>::projective_from_affine(&point);
    if !is_in_bls12381_g1_subgroup_vartime(&projective) {
        return Err(DeserializationStatus::PointNotInSubgroup);
    }
    Ok(point)
}

// =================================================================
// CÓDEC BLS12-381 G2
// =================================================================

/**
 * Serialización comprimida de G2: 96 bytes, componente c1 primero,
 * signo sobre la ordenada por la convención lexicográfica de Fp2.
 */
pub fn serialize_g2_compressed(point: &AffinePoint<Bls12381G2>, output: &mut [u8; 96]) {
    if point.is_infinity.to_bool_vartime() {
        output.fill(0);
        output[0] = FLAG_COMPRESSED | FLAG_INFINITY;
        return;
    }
    let (c1_half, c0_half) = output.split_at_mut(BLS_FIELD_BYTES);
    point.x.c1.write_canonical_bytes_be(c1_half);
    point.x.c0.write_canonical_bytes_be(c0_half);
    let mut flags = FLAG_COMPRESSED;
    if fp2_is_lexicographically_largest(&point.y).to_bool_vartime() {
        flags |= FLAG_SIGN;
    }
    output[0] |= flags;
}

/**
 * Deserialización comprimida de G2 con verificación de curva y
 * subgrupo (raíz cuadrada en Fp2 por el método complejo).
 */
#[instrument(level = "debug", skip_all)]
pub fn deserialize_g2_compressed(
    bytes: &[u8],
) -> Result<AffinePoint<Bls12381G2>, DeserializationStatus> {
    if bytes.len() != 2 * BLS_FIELD_BYTES {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    let flags = bytes[0];
    if flags & FLAG_COMPRESSED == 0 {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    if flags & FLAG_INFINITY != 0 {
        if flags & !(FLAG_COMPRESSED | FLAG_INFINITY) != 0 || bytes[1..].iter().any(|b| *b != 0) {
            return Err(DeserializationStatus::InvalidEncoding);
        }
        return Ok(AffinePoint::infinity());
    }
    let mut c1_bytes = [0u8; BLS_FIELD_BYTES];
    c1_bytes.copy_from_slice(&bytes[..BLS_FIELD_BYTES]);
    c1_bytes[0] &= !(FLAG_COMPRESSED | FLAG_INFINITY | FLAG_SIGN);
    let c1_integer = BigInt::<6>::read_bytes_be(&c1_bytes)
        .map_err(|_| DeserializationStatus::InvalidEncoding)?;
    let c0_integer = BigInt::<6>::read_bytes_be(&bytes[BLS_FIELD_BYTES..])
        .map_err(|_| DeserializationStatus::InvalidEncoding)?;
    for integer in [&c1_integer, &c0_integer] {
        if integer.compare_vartime(&Bls12381Fp::MODULUS) != core::cmp::Ordering::Less {
            return Err(DeserializationStatus::CoordinateGreaterThanOrEqualModulus);
        }
    }
    let x = BlsFp2::from_coordinates(
        BlsFp::from_big_int(&c0_integer),
        BlsFp::from_big_int(&c1_integer),
    );
    let mut y = x
        .square_modular()
        .multiply_modular(&x)
        .add_modular(&<Bls12381G2 as CurveParameters>::COEFF_B);
    if !y.sqrt_if_square().to_bool_vartime() {
        return Err(DeserializationStatus::PointNotOnCurve);
    }
    let wants_largest = flags & FLAG_SIGN != 0;
    if wants_largest != fp2_is_lexicographically_largest(&y).to_bool_vartime() {
        y = y.negate_modular();
    }
    let point = AffinePoint::from_coordinates(x, y);
    let projective = WeierstrassEngine::<Bls12381G2>::projective_from_affine(&point);
    if !is_in_bls12381_g2_subgroup_vartime(&projective) {
        return Err(DeserializationStatus::PointNotInSubgroup);
    }
    Ok(point)
}

/**
 * Serialización no comprimida de G2: 192 bytes (x.c1, x.c0, y.c1,
 * y.c0) con bandera de infinito.
 */
pub fn serialize_g2_uncompressed(point: &AffinePoint<Bls12381G2>, output: &mut [u8; 192]) {
    if point.is_infinity.to_bool_vartime() {
        output.fill(0);
        output[0] = FLAG_INFINITY;
        return;
    }
    point.x.c1.write_canonical_bytes_be(&mut output[..48]);
    point.x.c0.write_canonical_bytes_be(&mut output[48..96]);
    point.y.c1.write_canonical_bytes_be(&mut output[96..144]);
    point.y.c0.write_canonical_bytes_be(&mut output[144..192]);
}

/**
 * Deserialización no comprimida de G2 con verificación de curva y
 * subgrupo.
 */
pub fn deserialize_g2_uncompressed(
    bytes: &[u8],
) -> Result<AffinePoint<Bls12381G2>, DeserializationStatus> {
    if bytes.len() != 4 * BLS_FIELD_BYTES {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    let flags = bytes[0];
    if flags & FLAG_COMPRESSED != 0 {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    if flags & FLAG_INFINITY != 0 {
        if bytes[1..].iter().any(|b| *b != 0) {
            return Err(DeserializationStatus::InvalidEncoding);
        }
        return Ok(AffinePoint::infinity());
    }
    let mut integers = [BigInt::<6>::ZERO; 4];
    for (index, chunk) in bytes.chunks_exact(BLS_FIELD_BYTES).enumerate() {
        integers[index] = BigInt::<6>::read_bytes_be(chunk)
            .map_err(|_| DeserializationStatus::InvalidEncoding)?;
        if integers[index].compare_vartime(&Bls12381Fp::MODULUS) != core::cmp::Ordering::Less {
            return Err(DeserializationStatus::CoordinateGreaterThanOrEqualModulus);
        }
    }
    let point = AffinePoint::from_coordinates(
        BlsFp2::from_coordinates(
            BlsFp::from_big_int(&integers[1]),
            BlsFp::from_big_int(&integers[0]),
        ),
        BlsFp2::from_coordinates(
            BlsFp::from_big_int(&integers[3]),
            BlsFp::from_big_int(&integers[2]),
        ),
    );
    if !point.is_on_curve().to_bool_vartime() {
        return Err(DeserializationStatus::PointNotOnCurve);
    }
    let projective = WeierstrassEngine::<Bls12381G2>::projective_from_affine(&point);
    if !is_in_bls12381_g2_subgroup_vartime(&projective) {
        return Err(DeserializationStatus::PointNotInSubgroup);
    }
    Ok(point)
}

// =================================================================
// CÓDEC BANDERWAGON
// =================================================================

type WagonFp = FieldElement<Bls12381Fr, 4>;

/**
 * Serialización Banderwagon: 32 bytes de abscisa Big-Endian del
 * representante con ordenada lexicográficamente mayor.
 *
 * # Mathematical Proof:
 * La clase {P, P + t} con t = (0, -1) es {(x, y), (-x, -y)}; fijar la
 * ordenada mayor elige un representante único y la abscisa lo codifica.
 */
pub fn serialize_banderwagon(point: &EdwardsProjectivePoint<Bandersnatch>, output: &mut [u8; 32]) {
    let affine = EdwardsEngine::<Bandersnatch>::affine_from_projective(point);
    let mut x = affine.x;
    let flip = affine.y.is_lexicographically_largest().not();
    x.conditional_negate(flip);
    x.write_canonical_bytes_be(output);
}

/**
 * Deserialización Banderwagon con verificación de pertenencia a la
 * curva y al cociente del subgrupo de orden 2.
 *
 * # Mathematical Proof:
 * La clase de (x, y) pertenece al cociente Banderwagon si y solo si
 * 1 - a x^2 es un residuo cuadrático; la ordenada se reconstruye de
 * y^2 = (1 - a x^2) / (1 - d x^2) eligiendo la raíz mayor.
 */
#[instrument(level = "debug", skip_all)]
pub fn deserialize_banderwagon(
    bytes: &[u8],
) -> Result<EdwardsProjectivePoint<Bandersnatch>, DeserializationStatus> {
    if bytes.len() != 32 {
        return Err(DeserializationStatus::InvalidEncoding);
    }
    let x_integer =
        BigInt::<4>::read_bytes_be(bytes).map_err(|_| DeserializationStatus::InvalidEncoding)?;
    if x_integer.compare_vartime(&Bls12381Fr::MODULUS) != core::cmp::Ordering::Less {
        return Err(DeserializationStatus::CoordinateGreaterThanOrEqualModulus);
    }
    let x = WagonFp::from_big_int(&x_integer);
    let x_squared = x.square_modular();
    let one = WagonFp::one();
    let quotient_probe = one.subtract_modular(
        &<Bandersnatch as EdwardsParameters>::COEFF_A.multiply_modular(&x_squared),
    );
    // Pertenencia al cociente: 1 - a x^2 debe ser cuadrado.
    let mut probe_root = quotient_probe;
    if !probe_root.sqrt_if_square().to_bool_vartime() {
        return Err(DeserializationStatus::PointNotInSubgroup);
    }
    let denominator = one.subtract_modular(
        &<Bandersnatch as EdwardsParameters>::COEFF_D.multiply_modular(&x_squared),
    );
    let mut y = quotient_probe.multiply_modular(&denominator.invert());
    if !y.sqrt_if_square().to_bool_vartime() {
        return Err(DeserializationStatus::PointNotOnCurve);
    }
    let flip = y.is_lexicographically_largest().not();
    y.conditional_negate(flip);
    let point = EdwardsAffinePoint::<Bandersnatch> { x, y };
    if !point.is_on_curve().to_bool_vartime() {
        return Err(DeserializationStatus::PointNotOnCurve);
    }
    Ok(EdwardsProjectivePoint::from_affine(&point))
}

/// Igualdad en el cociente Banderwagon: x1 y2 = x2 y1.
#[must_use]
pub fn banderwagon_equals(
    left: &EdwardsProjectivePoint<Bandersnatch>,
    right: &EdwardsProjectivePoint<Bandersnatch>,
) -> SecretBool {
    left.x
        .multiply_modular(&right.y)
        .equals(&right.x.multiply_modular(&left.y))
}
