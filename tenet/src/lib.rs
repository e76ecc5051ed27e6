//! # tenet - Contract-First Capability Dispatch
//!
//! `tenet` binds one concrete variant per capability and calls it only
//! through a narrow trait contract. Static binding through generics is the
//! default path; runtime selection through a [`Registry`] is available when
//! the variant comes from configuration.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tenet::prelude::*;
//! use tenet::variants::{Dog, Cat, PaypalProcessor};
//!
//! // Same caller, different variants.
//! make_animal_sound(&Dog)?; // Bark
//! make_animal_sound(&Cat)?; // Meow
//!
//! // Bound once, at construction.
//! let checkout = Checkout::new(PaypalProcessor);
//! checkout.pay(Amount::dollars(100))?;
//!
//! // Chosen at runtime.
//! let keys = Keys::load("keys.toml")?;
//! let connector = tenet::standard::connectors()
//!     .resolve("postgres", keys.connection_for("postgres")?)?;
//! DataLayer::new(connector).open().await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod config;

pub use config::{ConfigError, Keys};

pub use tenet_core::{
    Amount, BoxError, Capabilities, Capability, CapabilityError, ConnectionState, Connector,
    Delivery, Document, DynConnector, Email, Fax, Job, JobKind, Notifier, PaymentProcessor,
    Printer, Receipt, RegistryError, Scanner, Sound, SoundMaker, TenetError, Unbound, Variant,
};

// Runtime selection
pub use tenet_std::registry::{Factory, Registry, RegistryBuilder};

/// Registries pre-populated with the standard variants.
pub mod standard {
    pub use tenet_std::standard::{animals, connectors, payments};
}

/// Data-store connectors and their driver seam.
pub mod connectors {
    pub use tenet_std::connectors::{
        ConnectionString, Driver, Endpoint, EndpointError, Flavor, Link, MongoConnector,
        PostgresConnector, TcpDriver,
    };
}

/// Standard variants.
pub mod variants {
    pub use tenet_std::variants::{
        BasicPrinter, BasicProcessor, CardProcessor, Cat, ConsoleMailer, Dog, FlatbedScanner,
        GenericAnimal, MultiFunctionMachine, PaypalProcessor, StripeProcessor,
    };
}

/// Callers bound to contracts.
pub mod consumers {
    pub use tenet_std::consumers::{Checkout, DataLayer, OfficeUser, TaskReport, make_animal_sound};
}

/// Order lifecycle and checkout.
pub mod orders {
    pub use tenet_std::orders::{Confirmation, Order, OrderDesk, OrderError, OrderStatus};
}

/// Outcome logging.
pub mod observe {
    pub use tenet_std::observe::Observed;
}

/// Testing utilities.
pub mod testing {
    pub use tenet_std::testing::{CountingProcessor, RecordingNotifier, ScriptedDriver};
}

/// Prelude module - common imports for Tenet.
///
/// # Usage
///
/// ```rust,ignore
/// use tenet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Amount, Capabilities, CapabilityError, Connector, Document, Fax, Keys, Notifier,
        PaymentProcessor, Printer, Registry, Scanner, SoundMaker, Variant,
        consumers::{Checkout, DataLayer, OfficeUser, make_animal_sound},
    };
}
