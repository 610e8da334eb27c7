//! Shader contract: the uniform block consumed by `shaders/lava.wgsl` and a
//! CPU reference of its per-pixel math.
//!
//! The CPU path exists for tests and tooling; the GPU evaluates the same
//! formulas in `fs_lava`.

use crate::config::EffectConfig;
use crate::constants::*;
use glam::{Vec2, Vec3, Vec4};

/// Uniform block, laid out to match `LavaUniforms` in WGSL (16-byte rows).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LavaUniforms {
    pub resolution: [f32; 4],
    pub mouse: [f32; 4],
    pub color: [f32; 4],
    pub cursor_color: [f32; 4],
    pub time: f32,
    pub animation_size: f32,
    pub ball_count: u32,
    pub cursor_ball_size: f32,
    pub clump_factor: f32,
    pub transparent: u32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub balls: [[f32; 4]; MAX_BLOBS],
}

impl LavaUniforms {
    /// Static part of the block, fixed for the lifetime of a session.
    pub fn from_config(config: &EffectConfig) -> Self {
        Self {
            resolution: [0.0; 4],
            mouse: [0.0; 4],
            color: config.color.to_vec4(),
            cursor_color: config.cursor_color.to_vec4(),
            time: 0.0,
            animation_size: config.animation_size,
            ball_count: config.effective_ball_count() as u32,
            cursor_ball_size: config.cursor_ball_size,
            clump_factor: config.clump_factor,
            transparent: config.transparent as u32,
            _pad0: 0.0,
            _pad1: 0.0,
            balls: [[0.0; 4]; MAX_BLOBS],
        }
    }

    /// Per-frame part: time, resolution, cursor and blob states.
    pub fn set_frame(&mut self, time: f32, resolution: Vec2, cursor: Vec2, blobs: &[Vec3]) {
        self.time = time;
        self.resolution = [resolution.x, resolution.y, 0.0, 0.0];
        self.mouse = [cursor.x, cursor.y, 0.0, 0.0];
        for (slot, b) in self.balls.iter_mut().zip(blobs) {
            *slot = [b.x, b.y, b.z, 0.0];
        }
    }

    #[inline]
    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.resolution[0], self.resolution[1])
    }

    #[inline]
    pub fn active_blobs(&self) -> &[[f32; 4]] {
        &self.balls[..(self.ball_count as usize).min(MAX_BLOBS)]
    }

    /// Summed field `(m1, m2)` at a bottom-origin pixel: blobs, then cursor.
    pub fn field_at(&self, pixel: Vec2) -> (f32, f32) {
        let res = self.resolution();
        let coord = pixel_to_world(pixel, res, self.animation_size);
        let mouse = pixel_to_world(
            Vec2::new(self.mouse[0], self.mouse[1]),
            res,
            self.animation_size,
        );
        let m1 = self
            .active_blobs()
            .iter()
            .map(|b| metaball_value(Vec2::new(b[0], b[1]), b[2], coord))
            .sum::<f32>();
        let m2 = metaball_value(mouse, self.cursor_ball_size, coord);
        (m1, m2)
    }

    /// Reference color for the pixel whose lower-left corner is `pixel`.
    ///
    /// `fwidth` is approximated with forward differences one pixel along
    /// each axis, the way a 2x2 fragment quad sees it.
    pub fn shade_pixel(&self, pixel: Vec2) -> Vec4 {
        let (m1, m2) = self.field_at(pixel);
        let total = m1 + m2;
        let (ax, bx) = self.field_at(pixel + Vec2::X);
        let (ay, by) = self.field_at(pixel + Vec2::Y);
        let fw = ((ax + bx) - total).abs() + ((ay + by) - total).abs();
        let f = coverage(total, fw);
        let c = blend_color(
            Vec3::from_slice(&self.color[..3]),
            Vec3::from_slice(&self.cursor_color[..3]),
            m1,
            m2,
        );
        let alpha = if self.transparent != 0 { f } else { 1.0 };
        (c * f).extend(alpha)
    }
}

/// Map a bottom-origin pixel to world space: centered, `animation_size`
/// world units across the canvas height.
#[inline]
pub fn pixel_to_world(pixel: Vec2, resolution: Vec2, animation_size: f32) -> Vec2 {
    let scale = animation_size / resolution.y;
    (pixel - resolution * 0.5) * scale
}

/// Inverse-square field of a circle: `r² / |p - c|²`.
///
/// Equals 1 on the circle itself and is infinite at the center.
#[inline]
pub fn metaball_value(c: Vec2, r: f32, p: Vec2) -> f32 {
    let d = p - c;
    (r * r) / d.dot(d)
}

/// GLSL/WGSL `smoothstep`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Anti-aliased coverage of the threshold crossing, given the field and its
/// screen-space derivative.
#[inline]
pub fn coverage(total: f32, fwidth: f32) -> f32 {
    let w = fwidth.clamp(DERIVATIVE_EPSILON, DERIVATIVE_MAX);
    smoothstep(-1.0, 1.0, (total - FIELD_THRESHOLD) / w)
}

/// Field-weighted mix of blob and cursor colors; black where no field.
#[inline]
pub fn blend_color(base: Vec3, cursor: Vec3, m1: f32, m2: f32) -> Vec3 {
    let total = m1 + m2;
    if total > 0.0 {
        base * (m1 / total) + cursor * (m2 / total)
    } else {
        Vec3::ZERO
    }
}
