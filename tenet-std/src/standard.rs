//! Registries pre-populated with the standard variants.
//!
//! Names are lowercase and stable; they are what configuration files and the
//! command line refer to.

use crate::{
    connectors::{ConnectionString, MongoConnector, PostgresConnector},
    registry::Registry,
    variants::{
        BasicProcessor, CardProcessor, Cat, Dog, GenericAnimal, PaypalProcessor, StripeProcessor,
    },
};
use tenet_core::{DynConnector, PaymentProcessor, SoundMaker};

/// Connectors keyed by data-store family: `mongodb`, `postgres`.
pub fn connectors() -> Registry<dyn DynConnector, ConnectionString> {
    Registry::builder()
        .register("mongodb", |uri: ConnectionString| {
            Box::new(MongoConnector::new(uri)) as Box<dyn DynConnector>
        })
        .register("postgres", |uri: ConnectionString| {
            Box::new(PostgresConnector::new(uri)) as Box<dyn DynConnector>
        })
        .build()
}

/// Payment processors: `basic`, `paypal`, `stripe`, `card`.
pub fn payments() -> Registry<dyn PaymentProcessor> {
    Registry::builder()
        .register("basic", |()| Box::new(BasicProcessor) as Box<dyn PaymentProcessor>)
        .register("paypal", |()| Box::new(PaypalProcessor) as Box<dyn PaymentProcessor>)
        .register("stripe", |()| Box::new(StripeProcessor) as Box<dyn PaymentProcessor>)
        .register("card", |()| Box::new(CardProcessor) as Box<dyn PaymentProcessor>)
        .build()
}

/// Animals: `animal`, `dog`, `cat`.
pub fn animals() -> Registry<dyn SoundMaker> {
    Registry::builder()
        .register("animal", |()| Box::new(GenericAnimal) as Box<dyn SoundMaker>)
        .register("dog", |()| Box::new(Dog) as Box<dyn SoundMaker>)
        .register("cat", |()| Box::new(Cat) as Box<dyn SoundMaker>)
        .build()
}
