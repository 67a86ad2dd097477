//! Vector and 4×4 matrix math for camera and model transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Projection targets the
//! WebGPU clip volume (depth in `0..1`).

/// 3-component vector.
pub type Vec3 = [f32; 3];

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scaled(v: Vec3, s: f32) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`. The zero vector stays zero.
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len > 0.0 {
        scaled(v, 1.0 / len)
    } else {
        v
    }
}

/// GLSL `mix`: `a * (1 - t) + b * t`, unclamped.
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [
        a[0] * (1.0 - t) + b[0] * t,
        a[1] * (1.0 - t) + b[1] * t,
        a[2] * (1.0 - t) + b[2] * t,
    ]
}

/// Perspective projection matrix.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        far * near * range_inv,
        0.0,
    ]
}

/// Right-handed view matrix looking from `eye` toward `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = normalize(sub(target, eye));
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        s[0],
        u[0],
        -f[0],
        0.0,
        s[1],
        u[1],
        -f[1],
        0.0,
        s[2],
        u[2],
        -f[2],
        0.0,
        -dot(s, eye),
        -dot(u, eye),
        dot(f, eye),
        1.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1) without perspective divide.
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    [
        m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12],
        m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13],
        m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14],
    ]
}

/// Inverse-transpose of the upper-left 3×3 of `m`, embedded in a `Mat4`.
///
/// Columns 0-2 carry the 3×3 (the shader reads `.xyz` of each); the rest is
/// identity padding. A singular input yields the identity.
pub fn normal_matrix(m: &Mat4) -> Mat4 {
    let a = |col: usize, row: usize| m[col * 4 + row];

    // Cofactors of the 3×3.
    let c00 = a(1, 1) * a(2, 2) - a(2, 1) * a(1, 2);
    let c01 = a(2, 1) * a(0, 2) - a(0, 1) * a(2, 2);
    let c02 = a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2);
    let c10 = a(2, 0) * a(1, 2) - a(1, 0) * a(2, 2);
    let c11 = a(0, 0) * a(2, 2) - a(2, 0) * a(0, 2);
    let c12 = a(1, 0) * a(0, 2) - a(0, 0) * a(1, 2);
    let c20 = a(1, 0) * a(2, 1) - a(2, 0) * a(1, 1);
    let c21 = a(2, 0) * a(0, 1) - a(0, 0) * a(2, 1);
    let c22 = a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1);

    let det = a(0, 0) * c00 + a(1, 0) * c01 + a(2, 0) * c02;
    if det.abs() < f32::EPSILON {
        return IDENTITY;
    }
    let inv = 1.0 / det;

    // (M⁻¹)ᵀ = C / det, where c_rc is the cofactor at row r, column c.
    [
        c00 * inv,
        c10 * inv,
        c20 * inv,
        0.0,
        c01 * inv,
        c11 * inv,
        c21 * inv,
        0.0,
        c02 * inv,
        c12 * inv,
        c22 * inv,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]
}

// =============================================================================
// Tests
// =============================================================================
