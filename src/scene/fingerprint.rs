use crate::{
    foundation::math::Fnv1a64,
    scene::model::{BuildingStyle, NeonHue, Scene},
};

/// Stable 128-bit digest of a scene's random choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SceneFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

impl SceneFingerprint {
    /// Lowercase hex, high half first.
    pub fn to_hex(self) -> String {
        format!("{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash canvas, building placements and neon lines.
///
/// Two scenes with the same fingerprint placed the same buildings with the same styles.
pub fn fingerprint_scene(scene: &Scene) -> SceneFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_u64_pair(&mut a, &mut b, u64::from(scene.canvas.width));
    write_u64_pair(&mut a, &mut b, u64::from(scene.canvas.height));
    write_f64_pair(&mut a, &mut b, scene.padding);

    write_u64_pair(&mut a, &mut b, scene.layers.len() as u64);
    for layer in &scene.layers {
        write_f64_pair(&mut a, &mut b, layer.depth);
        write_u64_pair(&mut a, &mut b, layer.buildings.len() as u64);
        for bld in &layer.buildings {
            write_f64_pair(&mut a, &mut b, bld.x);
            write_f64_pair(&mut a, &mut b, bld.width);
            write_f64_pair(&mut a, &mut b, bld.height);
            write_f64_pair(&mut a, &mut b, bld.tilt_deg);
            write_u8_pair(
                &mut a,
                &mut b,
                match bld.style {
                    BuildingStyle::Straight => 0,
                    BuildingStyle::Cantilever => 1,
                    BuildingStyle::Curve => 2,
                },
            );
        }
    }

    write_u64_pair(&mut a, &mut b, scene.neon_lines.len() as u64);
    for line in &scene.neon_lines {
        write_f64_pair(&mut a, &mut b, line.x1);
        write_f64_pair(&mut a, &mut b, line.x2);
        write_f64_pair(&mut a, &mut b, line.y);
        write_u8_pair(
            &mut a,
            &mut b,
            match line.hue {
                NeonHue::Primary => 0,
                NeonHue::Secondary => 1,
            },
        );
    }

    SceneFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    a.write_f64(v);
    b.write_f64(v);
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
