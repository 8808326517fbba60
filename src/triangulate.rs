use num_traits::Float;

use crate::index::Index;
use crate::vector::Vector;

/// Ear-clips a simple, hole-free polygon into triangle indices.
///
/// `EMIT_CW` is the compile-time emission-orientation knob: triangles are
/// always produced winding `EMIT_CW`, regardless of the input polygon's own
/// `clockwise` orientation (the last two indices of a triangle are swapped
/// when the two disagree).
///
/// `scratch_ring` must hold at least `vertices.len()` indices; it is
/// reinitialized on every call, so it is purely scratch space the caller
/// reuses across invocations to avoid allocation. `out_indices` receives up
/// to `3 * (n - 2)` indices; if it is shorter, triangulation stops early and
/// returns the count actually written.
///
/// Returns the number of indices written (always a multiple of 3). Returns
/// `0` immediately for `n < 3`.
///
/// ```
/// use polyclip::{triangulate, Vector};
///
/// let triangle = [Vector::new(0.0_f32, 0.0), Vector::new(1.0, 0.0), Vector::new(0.0, 1.0)];
/// let mut scratch = [0usize; 3];
/// let mut out = [0usize; 3];
/// let written = triangulate::<_, _, false>(&triangle, false, &mut scratch, 0, &mut out);
/// assert_eq!(written, 3);
/// assert_eq!(out, [0, 1, 2]);
/// ```
pub fn triangulate<T: Float, Idx: Index, const EMIT_CW: bool>(
    vertices: &[Vector<T>],
    clockwise: bool,
    scratch_ring: &mut [Idx],
    begin: Idx,
    out_indices: &mut [Idx],
) -> usize {
    let n = vertices.len();
    if n < 3 {
        return 0;
    }
    debug_assert!(scratch_ring.len() >= n, "scratch ring must hold at least n indices");

    for (i, slot) in scratch_ring.iter_mut().enumerate().take(n) {
        *slot = Idx::from_usize(i);
    }

    let mut size = n;
    let mut cursor = 0usize;
    let mut written = 0usize;
    let mut attempts = 0usize;

    while size > 2 {
        let pb = (cursor + 1) % size;
        let pc = (cursor + 2) % size;

        if is_ear(vertices, scratch_ring, size, cursor, pb, pc, clockwise) {
            if written + 3 > out_indices.len() {
                return written;
            }

            let ra = scratch_ring[cursor].into_usize();
            let rb = scratch_ring[pb].into_usize();
            let rc = scratch_ring[pc].into_usize();
            let (i1, i2) = if clockwise == EMIT_CW { (rb, rc) } else { (rc, rb) };

            out_indices[written] = Idx::from_usize(ra) + begin;
            out_indices[written + 1] = Idx::from_usize(i1) + begin;
            out_indices[written + 2] = Idx::from_usize(i2) + begin;
            written += 3;

            for k in pb..size - 1 {
                scratch_ring[k] = scratch_ring[k + 1];
            }
            size -= 1;
            cursor = (cursor + size - 1) % size;
            attempts = 0;
        } else {
            cursor = (cursor + 1) % size;
            attempts += 1;
            if attempts > 2 * size {
                break;
            }
        }
    }

    written
}

/// Vertex `b` (at ring position `pb`) is an ear of the triangle `(pa, pb, pc)`
/// when its winding matches the polygon and no other remaining vertex lies
/// inside the closed triangle.
fn is_ear<T: Float, Idx: Index>(
    vertices: &[Vector<T>],
    scratch_ring: &[Idx],
    size: usize,
    pa: usize,
    pb: usize,
    pc: usize,
    clockwise: bool,
) -> bool {
    let va = vertices[scratch_ring[pa].into_usize()];
    let vb = vertices[scratch_ring[pb].into_usize()];
    let vc = vertices[scratch_ring[pc].into_usize()];

    let cross = vb.sub(va).cross(vc.sub(va));
    if (cross >= T::zero()) != clockwise {
        return false;
    }

    let mut p = (pc + 1) % size;
    while p != pa {
        let vp = vertices[scratch_ring[p].into_usize()];
        if point_in_triangle(va, vb, vc, vp) {
            return false;
        }
        p = (p + 1) % size;
    }
    true
}

/// Barycentric point-in-triangle test; boundary points count as inside so
/// collinear neighbors never stall the ear search.
fn point_in_triangle<T: Float>(va: Vector<T>, vb: Vector<T>, vc: Vector<T>, p: Vector<T>) -> bool {
    let ab = vb.sub(va);
    let ac = vc.sub(va);
    let ap = p.sub(va);

    let d00 = ab.dot(ab);
    let d01 = ab.dot(ac);
    let d11 = ac.dot(ac);
    let d20 = ap.dot(ab);
    let d21 = ap.dot(ac);

    let denom = d00 * d11 - d01 * d01;
    if denom == T::zero() {
        return false;
    }
    let r = (d11 * d20 - d01 * d21) / denom;
    let s = (d00 * d21 - d01 * d20) / denom;
    r >= T::zero() && s >= T::zero() && (r + s) <= T::one()
}
