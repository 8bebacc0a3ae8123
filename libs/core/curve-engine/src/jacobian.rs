// [libs/core/curve-engine/src/jacobian.rs]
/*!
 * =================================================================
 * APARATO: JACOBIAN BURST ENGINE (V24.0 - HOT PATH PUBLIC DATA)
 * CLASIFICACIÓN: CORE GEOMETRY (ESTRATO L1)
 * RESPONSABILIDAD: LEY DE GRUPO JACOBIANA DE TIEMPO VARIABLE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. HOT PATH: La adición mixta de 8 multiplicaciones y la
 *    duplicación 3M + 4S alimentan los cubos del MSM y las ráfagas de
 *    base fija, donde los operandos son públicos.
 * 2. VARTIME DISCIPLINE: Las singularidades (infinito, colisión,
 *    inversos) se resuelven por rama explícita; el sufijo '_vartime'
 *    reserva estas rutas a datos no secretos.
 *
 * # Mathematical Proof (Jacobian Projection):
 * Un punto (X, Y, Z) representa el afín (X / Z^2, Y / Z^3); la
 * transición al plano afín preserva la integridad del grupo y el
 * infinito se codifica como Z = 0.
 * =================================================================
 */

use crate::traits::{CurveFieldElement, CurveParameters};
use crate::weierstrass::AffinePoint;

/// Punto en coordenadas Jacobianas; infinito en Z = 0.
#[derive(Debug, Clone, Copy)]
pub struct JacobianPoint<C: CurveParameters> {
    /// Coordenada X del espacio Jacobiano.
    pub x: C::Field,
    /// Coordenada Y del espacio Jacobiano.
    pub y: C::Field,
    /// Coordenada Z (denominador compartido).
    pub z: C::Field,
}

impl<C: CurveParameters> JacobianPoint<C> {
    /// Elemento neutro.
    #[must_use]
    pub fn infinity() -> Self {
        Self {
            x: C::Field::field_one(),
            y: C::Field::field_one(),
            z: C::Field::field_zero(),
        }
    }

    /// Ascensión desde el plano afín (Z = 1).
    #[must_use]
    pub fn from_affine(point: &AffinePoint<C>) -> Self {
        if point.is_infinity.to_bool_vartime() {
            return Self::infinity();
        }
        Self { x: point.x, y: point.y, z: C::Field::field_one() }
    }

    /// Selector público "es el elemento neutro".
    #[inline]
    #[must_use]
    pub fn is_infinity_vartime(&self) -> bool {
        self.z.is_zero().to_bool_vartime()
    }

    /// Negación del punto.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { x: self.x, y: self.y.negate_modular(), z: self.z }
    }
}

/// Motor Jacobiano de tiempo variable para ráfagas sobre datos públicos.
pub struct JacobianEngine<C>(core::marker::PhantomData<C>);

impl<C: CurveParameters> JacobianEngine<C> {
    /**
     * Duplicación Jacobiana 3M + 4S para a = 0.
     *
     * # Mathematical Proof:
     * A = X^2, B = Y^2, C = B^2, D = 2((X + B)^2 - A - C), E = 3A,
     * X3 = E^2 - 2D, Y3 = E (D - X3) - 8C, Z3 = 2 Y Z.
     */
    #[must_use]
    pub fn double(point: &JacobianPoint<C>) -> JacobianPoint<C> {
        if point.is_infinity_vartime() || point.y.is_zero().to_bool_vartime() {
            return JacobianPoint::infinity();
        }
        let x_squared = point.x.square_modular();
        let y_squared = point.y.square_modular();
        let y_fourth = y_squared.square_modular();
        let mut d = point
            .x
            .add_modular(&y_squared)
            .square_modular()
            .subtract_modular(&x_squared)
            .subtract_modular(&y_fourth);
        d = d.double_modular();
        let e = x_squared.double_modular().add_modular(&x_squared);
        let output_x = e.square_modular().subtract_modular(&d.double_modular());
        let eight_c = y_fourth.double_modular().double_modular().double_modular();
        let output_y = e
            .multiply_modular(&d.subtract_modular(&output_x))
            .subtract_modular(&eight_c);
        let output_z = point.y.double_modular().multiply_modular(&point.z);
        JacobianPoint { x: output_x, y: output_y, z: output_z }
    }

    /**
     * Adición mixta Jacobiano + afín (Z2 = 1), el camino caliente del
     * barrido de cubos.
     *
     * # Mathematical Proof:
     * Con Z2 = 1 la fórmula general de 11 multiplicaciones se reduce a
     * 8: U2 = x2 Z1^2, S2 = y2 Z1^3, H = U2 - X1, R = S2 - Y1,
     * X3 = R^2 - H^3 - 2 X1 H^2, Y3 = R (X1 H^2 - X3) - Y1 H^3,
     * Z3 = Z1 H.
     */
    #[must_use]
    pub fn add_mixed_vartime(
        point_alpha: &JacobianPoint<C>,
        beta_affine: &AffinePoint<C>,
    ) -> JacobianPoint<C> {
        if beta_affine.is_infinity.to_bool_vartime() {
            return *point_alpha;
        }
        if point_alpha.is_infinity_vartime() {
            return JacobianPoint::from_affine(beta_affine);
        }

        let z1_squared = point_alpha.z.square_modular();
        let projective_u2 = beta_affine.x.multiply_modular(&z1_squared);
        let z1_cubed = point_alpha.z.multiply_modular(&z1_squared);
        let projective_s2 = beta_affine.y.multiply_modular(&z1_cubed);

        let horizontal_distance = projective_u2.subtract_modular(&point_alpha.x);
        let vertical_slope = projective_s2.subtract_modular(&point_alpha.y);

        if horizontal_distance.is_zero().to_bool_vartime() {
            if vertical_slope.is_zero().to_bool_vartime() {
                return Self::double(point_alpha);
            }
            return JacobianPoint::infinity();
        }

        let distance_squared = horizontal_distance.square_modular();
        let distance_cubed = distance_squared.multiply_modular(&horizontal_distance);
        let intermediate_v = point_alpha.x.multiply_modular(&distance_squared);

        let output_x = vertical_slope
            .square_modular()
            .subtract_modular(&distance_cubed)
            .subtract_modular(&intermediate_v.double_modular());
        let output_y = vertical_slope
            .multiply_modular(&intermediate_v.subtract_modular(&output_x))
            .subtract_modular(&point_alpha.y.multiply_modular(&distance_cubed));
        let output_z = point_alpha.z.multiply_modular(&horizontal_distance);
        JacobianPoint { x: output_x, y: output_y, z: output_z }
    }

    /**
     * Adición Jacobiana general de tiempo variable.
     */
    #[must_use]
    pub fn sum_vartime(
        point_alpha: &JacobianPoint<C>,
        point_beta: &JacobianPoint<C>,
    ) -> JacobianPoint<C> {
        if point_alpha.is_infinity_vartime() {
            return *point_beta;
        }
        if point_beta.is_infinity_vartime() {
            return *point_alpha;
        }
        let z1_squared = point_alpha.z.square_modular();
        let z2_squared = point_beta.z.square_modular();
        let u1 = point_alpha.x.multiply_modular(&z2_squared);
        let u2 = point_beta.x.multiply_modular(&z1_squared);
        let s1 = point_alpha
            .y
            .multiply_modular(&z2_squared)
            .multiply_modular(&point_beta.z);
        let s2 = point_beta
            .y
            .multiply_modular(&z1_squared)
            .multiply_modular(&point_alpha.z);

        let horizontal_distance = u2.subtract_modular(&u1);
        let vertical_slope = s2.subtract_modular(&s1);

        if horizontal_distance.is_zero().to_bool_vartime() {
            if vertical_slope.is_zero().to_bool_vartime() {
                return Self::double(point_alpha);
            }
            return JacobianPoint::infinity();
        }

        let distance_squared = horizontal_distance.square_modular();
        let distance_cubed = distance_squared.multiply_modular(&horizontal_distance);
        let intermediate_v = u1.multiply_modular(&distance_squared);

        let output_x = vertical_slope
            .square_modular()
            .subtract_modular(&distance_cubed)
            .subtract_modular(&intermediate_v.double_modular());
        let output_y = vertical_slope
            .multiply_modular(&intermediate_v.subtract_modular(&output_x))
            .subtract_modular(&s1.multiply_modular(&distance_cubed));
        let output_z = point_alpha
            .z
            .multiply_modular(&point_beta.z)
            .multiply_modular(&horizontal_distance);
        JacobianPoint { x: output_x, y: output_y, z: output_z }
    }

    /// Proyección al plano afín (x = X / Z^2, y = Y / Z^3).
    #[must_use]
    pub fn affine_from_jacobian(point: &JacobianPoint<C>) -> AffinePoint<C> {
        if point.is_infinity_vartime() {
            return AffinePoint::infinity();
        }
        let z_inverse = point.z.invert();
        let z_inverse_squared = z_inverse.square_modular();
        AffinePoint {
            x: point.x.multiply_modular(&z_inverse_squared),
            y: point.y.multiply_modular(&z_inverse_squared).multiply_modular(&z_inverse),
            is_infinity: obsidian_core_math::prelude::SecretBool::FALSE,
        }
    }
}
