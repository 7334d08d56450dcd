use serde::{Deserialize, Serialize};

/// Alpha handling of a material
/// Mapping according to the glTF `alphaMode` string:
/// "OPAQUE" = Opaque (default)
/// "MASK" = Mask, cut out below `alpha_cutoff`
/// "BLEND" = Blend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlphaMode {
    #[default]
    Opaque,
    Mask,
    Blend,
}

impl AlphaMode {
    /// Parse the declared mode; missing or unknown strings become `Opaque`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("OPAQUE") => Self::Opaque,
            Some("MASK") => Self::Mask,
            Some("BLEND") => Self::Blend,
            Some(other) => {
                log::warn!("Unknown alpha mode: {other}, defaulting to OPAQUE");
                Self::Opaque
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Opaque => "OPAQUE",
            Self::Mask => "MASK",
            Self::Blend => "BLEND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_declared_modes() {
        assert_eq!(AlphaMode::parse(None), AlphaMode::Opaque);
        assert_eq!(AlphaMode::parse(Some("OPAQUE")), AlphaMode::Opaque);
        assert_eq!(AlphaMode::parse(Some("MASK")), AlphaMode::Mask);
        assert_eq!(AlphaMode::parse(Some("BLEND")), AlphaMode::Blend);
        assert_eq!(AlphaMode::parse(Some("GLASS")), AlphaMode::Opaque);
    }
}
