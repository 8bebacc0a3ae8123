// [libs/core/pairing-engine/src/lines.rs]
/*!
 * =================================================================
 * APARATO: LINE FUNCTION ENGINE (V17.0 - PROJECTIVE STEPS)
 * CLASIFICACIÓN: CORE PAIRING (ESTRATO L1)
 * RESPONSABILIDAD: PASOS DE DUPLICACIÓN Y ADICIÓN CON LÍNEA EVALUADA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. HOMOGENEOUS STEPS: El acumulador T del lazo de Miller vive en
 *    coordenadas proyectivas homogéneas sobre Fp2; cada paso entrega
 *    los tres coeficientes Fp2 de la línea evaluada.
 * 2. TWIST AGNOSTIC: Los coeficientes (b0, b2, b3) son idénticos para
 *    ambos tipos de twist; únicamente su posición en la base de Fp12
 *    cambia (patrón xy00z0 para twists M, x00yz0 para twists D).
 *
 * # Mathematical Proof (Tangent Line):
 * Para la duplicación con A = X Y / 2, B = Y^2, C = Z^2, E = 3 b' C,
 * F = 3 E, G = (B + F) / 2, H = (Y + Z)^2 - (B + C):
 * T' = (A (B - F), G^2 - 3 E^2, B H) y la tangente evaluada en
 * P = (xP, yP) es (E - B) + 3 X^2 xP w^k - H yP w^j, con las potencias
 * de w fijadas por el tipo de twist.
 * =================================================================
 */

use obsidian_core_math::prelude::{FieldElement, Fp2, TowerParameters};

/// Coeficientes Fp2 de una línea evaluada, previos a su colocación
/// dispersa en Fp12.
#[derive(Debug, Clone, Copy)]
pub struct LineCoefficients<P, const N: usize> {
    /// Coeficiente independiente del punto G1.
    pub b0: Fp2<P, N>,
    /// Coeficiente a escalar por la abscisa de P.
    pub b2: Fp2<P, N>,
    /// Coeficiente a escalar por la ordenada de P.
    pub b3: Fp2<P, N>,
}

/// Acumulador del lazo de Miller en proyectivas homogéneas sobre Fp2.
#[derive(Debug, Clone, Copy)]
pub struct MillerAccumulator<P, const N: usize> {
    /// Coordenada X.
    pub x: Fp2<P, N>,
    /// Coordenada Y.
    pub y: Fp2<P, N>,
    /// Coordenada Z.
    pub z: Fp2<P, N>,
}

impl<P: TowerParameters<N>, const N: usize> MillerAccumulator<P, N> {
    /// Inicializa el acumulador desde las coordenadas afines de Q.
    #[must_use]
    pub fn from_affine(x: Fp2<P, N>, y: Fp2<P, N>) -> Self {
        Self { x, y, z: Fp2::one() }
    }
}

/**
 * Paso de duplicación: T <- 2 T con la tangente evaluada.
 *
 * 'twist_b3' es 3 b' del catálogo del twist.
 */
#[must_use]
pub fn double_step<P: TowerParameters<N>, const N: usize>(
    accumulator: &mut MillerAccumulator<P, N>,
    twist_b: &Fp2<P, N>,
) -> LineCoefficients<P, N> {
    let a = accumulator.x.multiply_modular(&accumulator.y).half_modular();
    let b = accumulator.y.square_modular();
    let c = accumulator.z.square_modular();
    let d = c.double_modular().add_modular(&c);
    let e = twist_b.multiply_modular(&d);
    let f = e.double_modular().add_modular(&e);
    let g = b.add_modular(&f).half_modular();
    let h = accumulator
        .y
        .add_modular(&accumulator.z)
        .square_modular()
        .subtract_modular(&b.add_modular(&c));

    let x_squared = accumulator.x.square_modular();
    let e_squared = e.square_modular();

    accumulator.x = a.multiply_modular(&b.subtract_modular(&f));
    accumulator.y = g
        .square_modular()
        .subtract_modular(&e_squared.double_modular().add_modular(&e_squared));
    accumulator.z = b.multiply_modular(&h);

    LineCoefficients {
        b0: e.subtract_modular(&b),
        b2: x_squared.double_modular().add_modular(&x_squared),
        b3: h.negate_modular(),
    }
}

/**
 * Paso de adición: T <- T + Q con la cuerda evaluada.
 *
 * # Mathematical Proof:
 * theta = Y1 - y2 Z1 y lambda = X1 - x2 Z1 son las diferencias
 * proyectivas; la cuerda evaluada en P es
 * (theta x2 - lambda y2) - theta xP w^k + lambda yP w^j.
 */
#[must_use]
pub fn add_step<P: TowerParameters<N>, const N: usize>(
    accumulator: &mut MillerAccumulator<P, N>,
    q_x: &Fp2<P, N>,
    q_y: &Fp2<P, N>,
) -> LineCoefficients<P, N> {
    let theta = accumulator
        .y
        .subtract_modular(&q_y.multiply_modular(&accumulator.z));
    let lambda = accumulator
        .x
        .subtract_modular(&q_x.multiply_modular(&accumulator.z));
    let c = theta.square_modular();
    let d = lambda.square_modular();
    let e = lambda.multiply_modular(&d);
    let f = accumulator.z.multiply_modular(&c);
    let g = accumulator.x.multiply_modular(&d);
    let h = e.add_modular(&f).subtract_modular(&g.double_modular());
    let i = accumulator.y.multiply_modular(&e);

    accumulator.x = lambda.multiply_modular(&h);
    accumulator.y = theta
        .multiply_modular(&g.subtract_modular(&h))
        .subtract_modular(&i);
    accumulator.z = accumulator.z.multiply_modular(&e);

    LineCoefficients {
        b0: theta
            .multiply_modular(q_x)
            .subtract_modular(&lambda.multiply_modular(q_y)),
        b2: theta.negate_modular(),
        b3: lambda,
    }
}

/// Escala los coeficientes dependientes de P por sus coordenadas Fp.
#[must_use]
pub fn scale_by_g1_point<P: TowerParameters<N>, const N: usize>(
    line: &LineCoefficients<P, N>,
    p_x: &FieldElement<P, N>,
    p_y: &FieldElement<P, N>,
) -> LineCoefficients<P, N> {
    LineCoefficients {
        b0: line.b0,
        b2: line.b2.multiply_by_base(p_x),
        b3: line.b3.multiply_by_base(p_y),
    }
}
