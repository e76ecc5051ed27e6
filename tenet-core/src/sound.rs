//! Sound contract.

use crate::{error::CapabilityError, variant::Variant};
use std::{fmt, sync::Arc};

/// The sound a variant emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sound(pub &'static str);

impl Sound {
    /// The sound as a string slice.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for Sound {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Contract for anything that makes a sound.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot make a sound",
    label = "missing `SoundMaker` implementation"
)]
pub trait SoundMaker: Variant {
    /// Emit the variant's sound.
    fn make_sound(&self) -> Result<Sound, CapabilityError>;
}

impl<T: SoundMaker + ?Sized> SoundMaker for &T {
    fn make_sound(&self) -> Result<Sound, CapabilityError> {
        (**self).make_sound()
    }
}

impl<T: SoundMaker + ?Sized> SoundMaker for Box<T> {
    fn make_sound(&self) -> Result<Sound, CapabilityError> {
        (**self).make_sound()
    }
}

impl<T: SoundMaker + ?Sized> SoundMaker for Arc<T> {
    fn make_sound(&self) -> Result<Sound, CapabilityError> {
        (**self).make_sound()
    }
}
