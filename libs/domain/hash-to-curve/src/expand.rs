// [libs/domain/hash-to-curve/src/expand.rs]
/*!
 * =================================================================
 * APARATO: MESSAGE EXPANSION ENGINE (V13.0 - XMD SHA-256)
 * CLASIFICACIÓN: DOMAIN H2C (ESTRATO L3)
 * RESPONSABILIDAD: expand_message_xmd DEL CONSTRUCTO IETF
 *
 * # Mathematical Proof (XMD Chain):
 * b0 = H(Z_pad || msg || l_i_b_str || 0x00 || DST')
 * b1 = H(b0 || 0x01 || DST')
 * b_i = H((b0 xor b_(i-1)) || i || DST') para i en [2, ell],
 * con DST' = DST || len(DST). La cadena es determinista en
 * (msg, DST, longitud) y cada byte de salida depende de b0 completo.
 * =================================================================
 */

use crate::errors::HashToCurveError;
use sha2::{Digest, Sha256};

/// Bytes de salida de SHA-256.
const DIGEST_BYTES: usize = 32;
/// Bytes del bloque interno de SHA-256 (Z_pad).
const BLOCK_BYTES: usize = 64;

/**
 * Expansión determinista de un mensaje a 'output_length' bytes.
 *
 * # Errors:
 * 'DstTooLong' si la etiqueta supera 255 bytes;
 * 'OutputLengthTooLarge' si se requieren más de 255 bloques o más de
 * 65535 bytes.
 */
pub fn expand_message_xmd(
    message: &[u8],
    domain_separation_tag: &[u8],
    output_length: usize,
) -> Result<Vec<u8>, HashToCurveError> {
    if domain_separation_tag.len() > 255 {
        return Err(HashToCurveError::DstTooLong {
            got: domain_separation_tag.len(),
        });
    }
    let block_count = (output_length + DIGEST_BYTES - 1) / DIGEST_BYTES;
    if block_count > 255 || output_length > 65535 {
        return Err(HashToCurveError::OutputLengthTooLarge { requested: output_length });
    }

    let mut dst_prime = Vec::with_capacity(domain_separation_tag.len() + 1);
    dst_prime.extend_from_slice(domain_separation_tag);
    dst_prime.push(domain_separation_tag.len() as u8);

    let mut hasher = Sha256::new();
    hasher.update([0u8; BLOCK_BYTES]);
    hasher.update(message);
    hasher.update((output_length as u16).to_be_bytes());
    hasher.update([0u8]);
    hasher.update(&dst_prime);
    let b0 = hasher.finalize();

    let mut hasher = Sha256::new();
    hasher.update(b0);
    hasher.update([1u8]);
    hasher.update(&dst_prime);
    let mut previous = hasher.finalize();

    let mut output = Vec::with_capacity(block_count * DIGEST_BYTES);
    output.extend_from_slice(&previous);
    for block_index in 2..=block_count as u8 {
        let mut mixed = [0u8; DIGEST_BYTES];
        for (slot, (left, right)) in mixed.iter_mut().zip(b0.iter().zip(previous.iter())) {
            *slot = left ^ right;
        }
        let mut hasher = Sha256::new();
        hasher.update(mixed);
        hasher.update([block_index]);
        hasher.update(&dst_prime);
        previous = hasher.finalize();
        output.extend_from_slice(&previous);
    }
    output.truncate(output_length);
    Ok(output)
}
