//! # Variant identity and capability flags
//!
//! Every concrete implementation of a contract is a *variant*. Variants
//! describe themselves through [`Variant`]: a stable name for logs and
//! registries, and the [`Capabilities`] they actually provide.
//!
//! Callers that need to know whether an operation is meaningful for the bound
//! variant check [`Variant::capabilities`] instead of inspecting the concrete
//! type.

use std::sync::Arc;

/// A single capability a contract provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Connect to a data store.
    Connect,
    /// Process a payment.
    Pay,
    /// Emit a sound.
    Sound,
    /// Print a document.
    Print,
    /// Scan a document.
    Scan,
    /// Fax a document.
    Fax,
    /// Deliver a notification.
    Notify,
}

bitflags::bitflags! {
    /// A set of capabilities offered by a variant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u32 {
        /// [`Connector`](crate::Connector).
        const CONNECT = 1 << 0;
        /// [`PaymentProcessor`](crate::PaymentProcessor).
        const PAY = 1 << 1;
        /// [`SoundMaker`](crate::SoundMaker).
        const SOUND = 1 << 2;
        /// [`Printer`](crate::Printer).
        const PRINT = 1 << 3;
        /// [`Scanner`](crate::Scanner).
        const SCAN = 1 << 4;
        /// [`Fax`](crate::Fax).
        const FAX = 1 << 5;
        /// [`Notifier`](crate::Notifier).
        const NOTIFY = 1 << 6;
    }
}

impl Capability {
    /// Returns the bitflag for this capability.
    pub const fn as_set(self) -> Capabilities {
        match self {
            Self::Connect => Capabilities::CONNECT,
            Self::Pay => Capabilities::PAY,
            Self::Sound => Capabilities::SOUND,
            Self::Print => Capabilities::PRINT,
            Self::Scan => Capabilities::SCAN,
            Self::Fax => Capabilities::FAX,
            Self::Notify => Capabilities::NOTIFY,
        }
    }
}

impl From<Capability> for Capabilities {
    fn from(cap: Capability) -> Self {
        cap.as_set()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Capabilities::empty();
        for cap in iter {
            set |= cap.as_set();
        }
        set
    }
}

/// Identity shared by every variant.
///
/// This is the supertrait of every capability contract, so any bound variant
/// can be named and queried without knowing its concrete type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Tenet variant",
    label = "missing `Variant` implementation",
    note = "Variants must report a name and the capabilities they provide."
)]
pub trait Variant: Send + Sync {
    /// Stable, human-readable name of the variant (e.g. `"PayPal"`).
    fn name(&self) -> &'static str;

    /// The capabilities this variant actually provides.
    fn capabilities(&self) -> Capabilities;

    /// Returns `true` if every capability in `required` is provided.
    fn supports(&self, required: impl Into<Capabilities>) -> bool
    where
        Self: Sized,
    {
        self.capabilities().contains(required.into())
    }
}

impl<T: Variant + ?Sized> Variant for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

impl<T: Variant + ?Sized> Variant for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

impl<T: Variant + ?Sized> Variant for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}
