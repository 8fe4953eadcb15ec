use std::simd::cmp::SimdPartialOrd;
use std::simd::{f32x4, Mask};

use crate::point2d::{dot2, dot2_simd, perp, perp_simd, Point2D, Point2Dx4};

/// Signed edge function for the directed edge a -> b evaluated at p:
/// `(p.x-a.x)(b.y-a.y) - (p.y-a.y)(b.x-a.x)`. Positive on one side,
/// negative on the other, zero on the line. Also twice the signed area
/// of the triangle (a, b, p).
#[inline(always)]
pub fn edge(a: Point2D, b: Point2D, p: Point2D) -> f32 {
    dot2(p - a, perp(b - a))
}

/// Twice the signed triangle area; zero means degenerate.
#[inline(always)]
pub fn double_area(v0: Point2D, v1: Point2D, v2: Point2D) -> f32 {
    edge(v0, v1, v2)
}

/// Inside test without weights, for the flat-shaded paths. A point is inside
/// when all three edge values share a sign (all >= 0 or all <= 0), which
/// makes the test winding-order-agnostic.
#[inline(always)]
pub fn point_in_triangle(v0: Point2D, v1: Point2D, v2: Point2D, p: Point2D) -> bool {
    let e0 = edge(v0, v1, p);
    let e1 = edge(v1, v2, p);
    let e2 = edge(v2, v0, p);
    (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0)
}

/// Inside test that also produces barycentric weights for interpolation.
/// `inv_area` is `1 / double_area(v0, v1, v2)`; the caller must have skipped
/// degenerate triangles already. Weights are ordered to match v0, v1, v2.
#[inline(always)]
pub fn barycentric(
    v0: Point2D,
    v1: Point2D,
    v2: Point2D,
    p: Point2D,
    inv_area: f32,
    weights: &mut [f32; 3],
) -> bool {
    let e0 = edge(v1, v2, p);
    let e1 = edge(v2, v0, p);
    let e2 = edge(v0, v1, p);
    let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0)
        || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
    if !inside {
        return false;
    }
    // Edges carry the same sign as the area inside the triangle, so the
    // weights come out non-negative for either winding.
    weights[0] = e0 * inv_area;
    weights[1] = e1 * inv_area;
    weights[2] = e2 * inv_area;
    true
}

/// Four edge evaluations at once. Same arithmetic per lane as `edge`, so the
/// lane results are bit-identical to the scalar path.
#[inline(always)]
pub fn edge_simd(a: Point2D, b: Point2D, p: Point2Dx4) -> f32x4 {
    let a4 = Point2Dx4::splat(a);
    let ab = Point2Dx4::splat(b) - a4;
    dot2_simd(p - a4, perp_simd(ab))
}

/// Lane mask of the winding-agnostic inside test for four candidate points.
#[inline(always)]
pub fn inside_mask(v0: Point2D, v1: Point2D, v2: Point2D, p: Point2Dx4) -> Mask<i32, 4> {
    let e0 = edge_simd(v0, v1, p);
    let e1 = edge_simd(v1, v2, p);
    let e2 = edge_simd(v2, v0, p);
    let zero = f32x4::splat(0.0);
    let all_ge = e0.simd_ge(zero) & e1.simd_ge(zero) & e2.simd_ge(zero);
    let all_le = e0.simd_le(zero) & e1.simd_le(zero) & e2.simd_le(zero);
    all_ge | all_le
}
