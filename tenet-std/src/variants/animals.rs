//! Animals.

use tenet_core::{Capabilities, CapabilityError, Sound, SoundMaker, Variant};

macro_rules! animal {
    ($(#[$doc:meta])* $ty:ident => $name:literal, $sound:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty;

        impl Variant for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn capabilities(&self) -> Capabilities {
                Capabilities::SOUND
            }
        }

        impl SoundMaker for $ty {
            fn make_sound(&self) -> Result<Sound, CapabilityError> {
                Ok(Sound($sound))
            }
        }
    };
}

animal!(
    /// An animal of no particular kind.
    GenericAnimal => "animal", "Animal sound"
);
animal!(Dog => "dog", "Bark");
animal!(Cat => "cat", "Meow");
