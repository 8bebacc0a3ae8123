// [libs/core/curve-engine/src/scalar_mul.rs]
/*!
 * =================================================================
 * APARATO: SCALAR LADDER ENGINE (V29.0 - WINDOWED SOVEREIGN)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: MULTIPLICACIÓN ESCALAR GENÉRICA Y DE REFERENCIA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FIXED WINDOW: El método de ventana fija (4 o 5 bits según el
 *    tamaño del escalar) recorre la tabla con copias enmascaradas: el
 *    patrón de accesos a memoria es independiente del escalar secreto.
 * 2. GROUP ABSTRACTION: Una única escalera sirve a los puntos
 *    proyectivos Weierstrass y Edwards vía el contrato de grupo.
 * 3. REFERENCE PATH: 'scalar_mul_double_add_vartime' existe para
 *    certificar en cruz a los demás algoritmos; jamás recibe secretos.
 * =================================================================
 */

use crate::traits::GroupElement;
use obsidian_core_math::prelude::{BigInt, SecretBool, Word};
use tracing::trace;

/// Dígito de ventana extraído de un escalar; la posición es pública,
/// el valor es secreto.
#[inline]
#[must_use]
fn window_digit<const N: usize>(scalar: &BigInt<N>, start_bit: u32, width: u32) -> Word {
    let mut digit: Word = 0;
    for offset in 0..width {
        let bit_index = start_bit + offset;
        if (bit_index as usize) < N * 64 {
            digit |= scalar.bit(bit_index) << offset;
        }
    }
    digit
}

/**
 * Multiplicación escalar de tiempo constante por ventana fija.
 *
 * Precomputa {0, P, 2P, .., (2^w - 1) P}, recorre el escalar en
 * ventanas Big-Endian de w bits, duplica w veces por ventana y suma la
 * entrada indexada tras un barrido enmascarado completo de la tabla.
 * La suma del neutro para dígitos nulos mantiene el flujo uniforme.
 *
 * La cota 'scalar_bits' es pública (bits del orden del grupo).
 */
#[must_use]
pub fn scalar_mul_generic<G: GroupElement>(
    point: &G,
    scalar: &BigInt<4>,
    scalar_bits: u32,
) -> G {
    // Ventana de 5 bits a partir de 384 bits de escalar; 4 en el resto.
    if scalar_bits >= 384 {
        scalar_mul_fixed_window::<G, 32>(point, scalar, scalar_bits, 5)
    } else {
        scalar_mul_fixed_window::<G, 16>(point, scalar, scalar_bits, 4)
    }
}

fn scalar_mul_fixed_window<G: GroupElement, const TABLE: usize>(
    point: &G,
    scalar: &BigInt<4>,
    scalar_bits: u32,
    width: u32,
) -> G {
    let mut table = [G::group_identity(); TABLE];
    for index in 1..TABLE {
        table[index] = table[index - 1].group_sum(point);
    }
    let window_count = (scalar_bits + width - 1) / width;
    let mut accumulator = G::group_identity();
    for window in (0..window_count).rev() {
        for _ in 0..width {
            accumulator = accumulator.group_double();
        }
        let digit = window_digit(scalar, window * width, width);
        let mut addend = table[0];
        for index in 1..TABLE {
            addend.group_conditional_copy(
                &table[index],
                SecretBool::from_words_eq(digit, index as Word),
            );
        }
        accumulator = accumulator.group_sum(&addend);
    }
    accumulator
}

/**
 * Referencia pública de duplicar-y-sumar. Exponente visible: existe
 * para la certificación cruzada de los algoritmos de producción.
 */
#[must_use]
pub fn scalar_mul_double_add_vartime<G: GroupElement, const N: usize>(
    point: &G,
    scalar: &BigInt<N>,
) -> G {
    let bit_length = scalar.bit_length_vartime();
    trace!(bits = bit_length, "escalera de referencia duplicar-y-sumar");
    let mut accumulator = G::group_identity();
    for bit_index in (0..bit_length).rev() {
        accumulator = accumulator.group_double();
        if scalar.bit(bit_index) == 1 {
            accumulator = accumulator.group_sum(point);
        }
    }
    accumulator
}

/**
 * Multiplicación escalar w-NAF de tiempo variable (anchura 5) para
 * escalares públicos: recodificación en dígitos impares firmados con
 * al menos cuatro ceros entre dígitos, tabla impar {P, 3P, .., 31P}.
 *
 * # Mathematical Proof:
 * Para n impar o par, los dígitos d en {-31, .., -1, 0, 1, .., 31}
 * impares con n = sum d_i 2^i y d != 0 implican al menos w - 1 ceros
 * consecutivos, reduciendo las adiciones a ~bits / (w + 1).
 */
#[must_use]
pub fn scalar_mul_wnaf_vartime<G: GroupElement>(point: &G, scalar: &BigInt<4>) -> G {
    const WIDTH: u32 = 5;
    let mut digits = [0i8; 260];
    let mut remaining = *scalar;
    let mut position = 0usize;
    while !remaining.is_zero().to_bool_vartime() {
        if remaining.is_odd().to_bool_vartime() {
            let low = (remaining.limbs[0] & ((1 << (WIDTH + 1)) - 1)) as i64;
            let digit = if low >= 1 << WIDTH { low - (1 << (WIDTH + 1)) } else { low };
            digits[position] = digit as i8;
            if digit > 0 {
                let _ = remaining.sub_assign(&BigInt::from_word(digit as u64));
            } else {
                let _ = remaining.add_assign(&BigInt::from_word((-digit) as u64));
            }
        }
        remaining.shift_right_one();
        position += 1;
    }
    // Tabla impar {P, 3P, .., 31P}.
    let double_point = point.group_double();
    let mut odd_table = [*point; 16];
    for index in 1..16 {
        odd_table[index] = odd_table[index - 1].group_sum(&double_point);
    }
    let mut accumulator = G::group_identity();
    for index in (0..position).rev() {
        accumulator = accumulator.group_double();
        let digit = digits[index];
        if digit > 0 {
            accumulator = accumulator.group_sum(&odd_table[(digit as usize - 1) / 2]);
        } else if digit < 0 {
            accumulator =
                accumulator.group_sum(&odd_table[((-digit) as usize - 1) / 2].group_negate());
        }
    }
    accumulator
}

/**
 * Escalera conjunta de Straus para k0 P0 + k1 P1 en tiempo constante.
 *
 * Tabla de los cuatro subconjuntos {O, P0, P1, P0 + P1}; un dígito de
 * dos bits por iteración con barrido enmascarado. Es el corazón de la
 * multiplicación por endomorfismo de dos dimensiones.
 */
#[must_use]
pub fn joint_ladder_2<G: GroupElement>(
    point_0: &G,
    point_1: &G,
    scalar_0: &BigInt<4>,
    scalar_1: &BigInt<4>,
    ladder_bits: u32,
) -> G {
    let mut table = [G::group_identity(); 4];
    table[1] = *point_0;
    table[2] = *point_1;
    table[3] = point_0.group_sum(point_1);
    let mut accumulator = G::group_identity();
    for bit_index in (0..ladder_bits).rev() {
        accumulator = accumulator.group_double();
        let digit = scalar_0.bit(bit_index) | (scalar_1.bit(bit_index) << 1);
        let mut addend = table[0];
        for index in 1..4 {
            addend.group_conditional_copy(
                &table[index],
                SecretBool::from_words_eq(digit, index as Word),
            );
        }
        accumulator = accumulator.group_sum(&addend);
    }
    accumulator
}

/**
 * Escalera conjunta de cuatro puntos (descomposición GLS del twist):
 * k0 P0 + k1 P1 + k2 P2 + k3 P3 con tabla de 16 subconjuntos.
 */
#[must_use]
pub fn joint_ladder_4<G: GroupElement>(
    points: &[G; 4],
    scalars: &[BigInt<4>; 4],
    ladder_bits: u32,
) -> G {
    let mut table = [G::group_identity(); 16];
    for index in 1..16usize {
        // Cada entrada agrega el punto del bit más bajo encendido.
        let lowest = index.trailing_zeros() as usize;
        table[index] = table[index & (index - 1)].group_sum(&points[lowest]);
    }
    let mut accumulator = G::group_identity();
    for bit_index in (0..ladder_bits).rev() {
        accumulator = accumulator.group_double();
        let digit = scalars[0].bit(bit_index)
            | (scalars[1].bit(bit_index) << 1)
            | (scalars[2].bit(bit_index) << 2)
            | (scalars[3].bit(bit_index) << 3);
        let mut addend = table[0];
        for index in 1..16 {
            addend.group_conditional_copy(
                &table[index],
                SecretBool::from_words_eq(digit, index as Word),
            );
        }
        accumulator = accumulator.group_sum(&addend);
    }
    accumulator
}
