use std::fmt::{self, Debug};

#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::{Platform, REAL_PLATFORM, RealPlatform};

#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&REAL_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}

impl Platform for PlatformFacade {
    fn monotonic_secs(&self) -> f64 {
        match self {
            Self::Real(p) => p.monotonic_secs(),
            #[cfg(test)]
            Self::Fake(p) => p.monotonic_secs(),
        }
    }
}

impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Fake(p) => p.fmt(f),
        }
    }
}
