use radiometry::color::Color;

/// A Phong-model material. Each reflectance channel is optional: an absent channel means the
/// corresponding term is skipped by the shader, which is not the same as a zero-valued channel
/// (a zero channel would still spawn recursive rays or evaluate shadow queries).
///
/// - `ka`/`kd`/`ks`: ambient, diffuse and specular reflectance, with `shininess` as the
///   specular exponent.
/// - `kr`: mirror reflectance; `kt`: transmittance, refracting with relative index `ior`.
///
/// A material with `kr` or `kt` present is *specular*: it is shaded purely by recursive
/// reflection/refraction and bypasses the local terms.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub ka: Option<Color>,
    pub kd: Option<Color>,
    pub ks: Option<Color>,
    pub shininess: f32,
    pub kr: Option<Color>,
    pub kt: Option<Color>,
    pub ior: f32,
}

impl Material {
    /// A material with every channel absent. Useful as the starting point of the `with_*`
    /// builders; shades to black on its own.
    pub fn none() -> Self {
        Self {
            ka: None,
            kd: None,
            ks: None,
            shininess: 1.0,
            kr: None,
            kt: None,
            ior: 1.0,
        }
    }

    /// Ambient + diffuse only.
    pub fn matte(ka: Color, kd: Color) -> Self {
        Self {
            ka: Some(ka),
            kd: Some(kd),
            ..Self::none()
        }
    }

    /// Ambient + diffuse + specular highlight.
    pub fn plastic(ka: Color, kd: Color, ks: Color, shininess: f32) -> Self {
        Self {
            ks: Some(ks),
            shininess,
            ..Self::matte(ka, kd)
        }
    }

    /// A perfect mirror.
    pub fn mirror(kr: Color) -> Self {
        Self {
            kr: Some(kr),
            ..Self::none()
        }
    }

    /// A transparent material refracting with the given index.
    pub fn glass(kt: Color, ior: f32) -> Self {
        Self {
            kt: Some(kt),
            ior,
            ..Self::none()
        }
    }

    pub fn with_mirror(self, kr: Color) -> Self {
        Self {
            kr: Some(kr),
            ..self
        }
    }

    pub fn with_transmission(self, kt: Color, ior: f32) -> Self {
        Self {
            kt: Some(kt),
            ior,
            ..self
        }
    }

    pub fn with_specular(self, ks: Color, shininess: f32) -> Self {
        Self {
            ks: Some(ks),
            shininess,
            ..self
        }
    }

    /// True iff the material responds with mirror reflection and/or transmission.
    pub fn is_specular(&self) -> bool {
        self.kr.is_some() || self.kt.is_some()
    }

    pub fn summary(&self) -> String {
        let mut channels = vec![];
        if self.ka.is_some() {
            channels.push("ka");
        }
        if self.kd.is_some() {
            channels.push("kd");
        }
        if self.ks.is_some() {
            channels.push("ks");
        }
        if self.kr.is_some() {
            channels.push("kr");
        }
        if self.kt.is_some() {
            channels.push("kt");
        }
        format!("Phong{{{}}}", channels.join(", "))
    }
}
