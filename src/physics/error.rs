/// Errors raised while building or advancing a stick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum StickError {
    /// Endpoints coincide or are not finite, so the rod has no usable
    /// length or moment of inertia.
    InvalidGeometry { length: f64 },
    /// Timestep is zero, negative or not finite.
    InvalidTimestep { dt: f64 },
    /// A run setting that has no meaningful value, such as a NaN run length.
    InvalidSetting { name: &'static str, value: f64 },
}

impl std::fmt::Display for StickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGeometry { length } => {
                write!(f, "stick endpoints give unusable length {length}")
            }
            Self::InvalidTimestep { dt } => {
                write!(f, "timestep {dt} is not a positive finite interval")
            }
            Self::InvalidSetting { name, value } => write!(f, "{name} cannot be {value}"),
        }
    }
}

impl std::error::Error for StickError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestep_message_covers_non_finite() {
        let msg = StickError::InvalidTimestep { dt: f64::NAN }.to_string();
        assert_eq!(msg, "timestep NaN is not a positive finite interval");
    }
}
