use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::Viewport;
use crate::scene::line::{Domain, Line, LineBase, LineStyle};
use crate::scene::shading::{Shading, ShadingKind};
use crate::session::graph_session::RenderInput;

const XXH3_SEED: u64 = 0x3c6e_f372_fe94_f82b;

/// Stable 128-bit digest of a [`RenderInput`], recompute token included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Fingerprint everything that can change the output of a render.
pub fn fingerprint_input(input: &RenderInput) -> InputFingerprint {
    let mut h = StableHasher::new();
    h.write_u64(input.recompute_token);
    h.write_u64(input.sample_count as u64);
    write_viewport(&mut h, &input.viewport);

    h.write_u32(input.lines.len() as u32);
    for line in &input.lines {
        write_line(&mut h, line);
    }
    h.write_u32(input.shading.len() as u32);
    for s in &input.shading {
        write_shading(&mut h, s);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(v) => {
                self.write_u8(1);
                self.write_f64(v);
            }
            None => self.write_u8(0),
        }
    }

    fn finish(self) -> InputFingerprint {
        let v = self.inner.digest128();
        InputFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_viewport(h: &mut StableHasher, vp: &Viewport) {
    h.write_f64(vp.x_min);
    h.write_f64(vp.x_max);
    h.write_f64(vp.y_min);
    h.write_f64(vp.y_max);
}

fn write_line(h: &mut StableHasher, line: &Line) {
    match line {
        Line::Cartesian(l) => {
            h.write_u8(0);
            write_base(h, &l.base);
            h.write_str(&l.expression);
        }
        Line::Parametric(l) => {
            h.write_u8(1);
            write_base(h, &l.base);
            h.write_str(&l.x_expression);
            h.write_str(&l.y_expression);
        }
        Line::Polar(l) => {
            h.write_u8(2);
            write_base(h, &l.base);
            h.write_str(&l.r_expression);
        }
        Line::Implicit(l) => {
            h.write_u8(3);
            write_base(h, &l.base);
            h.write_str(&l.expression);
        }
    }
}

fn write_base(h: &mut StableHasher, base: &LineBase) {
    h.write_str(&base.id);
    h.write_str(&base.label);
    h.write_bool(base.visible);
    write_domain(h, base.domain);
    write_style(h, &base.style);
}

fn write_domain(h: &mut StableHasher, domain: Option<Domain>) {
    match domain {
        Some(d) => {
            h.write_u8(1);
            h.write_opt_f64(d.min);
            h.write_opt_f64(d.max);
        }
        None => h.write_u8(0),
    }
}

fn write_style(h: &mut StableHasher, style: &LineStyle) {
    h.write_str(&style.color);
    h.write_f64(style.width);
    h.write_f64(style.opacity);
    h.write_bool(style.dashed);
}

fn write_shading(h: &mut StableHasher, s: &Shading) {
    h.write_str(&s.id);
    h.write_u8(match s.kind {
        ShadingKind::BetweenLines => 0,
        ShadingKind::Inequality => 1,
        ShadingKind::Above => 2,
        ShadingKind::Below => 3,
    });
    h.write_u32(s.line_ids.len() as u32);
    for id in &s.line_ids {
        h.write_str(id);
    }
    h.write_str(&s.color);
    h.write_f64(s.opacity);
    match &s.expression {
        Some(e) => {
            h.write_u8(1);
            h.write_str(e);
        }
        None => h.write_u8(0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/fingerprint.rs"]
mod tests;
