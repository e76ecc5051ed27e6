//! Runtime selection through registries.

use tenet::{
    Amount, PaymentProcessor, Registry, RegistryBuilder, RegistryError, SoundMaker, Variant,
    standard,
    variants::{Cat, Dog},
};

#[test]
fn configured_name_selects_processor() {
    let payments = standard::payments();
    for (name, expected) in [
        ("basic", "Processing payment of $100"),
        ("paypal", "Processing payment of $100 via PayPal"),
        ("stripe", "Processing payment of $100 via Stripe"),
        ("card", "Processing payment of $100 via credit card"),
    ] {
        let processor = payments.get(name).unwrap();
        let receipt = processor.process_payment(Amount::dollars(100)).unwrap();
        assert_eq!(receipt.to_string(), expected);
    }
}

#[test]
fn unknown_variant_is_reported() {
    assert_eq!(
        standard::payments().get("bitcoin").err(),
        Some(RegistryError::NotFound("bitcoin".into()))
    );
}

#[test]
fn custom_registry_extends_without_touching_callers() {
    struct Cow;

    impl Variant for Cow {
        fn name(&self) -> &'static str {
            "cow"
        }

        fn capabilities(&self) -> tenet::Capabilities {
            tenet::Capabilities::SOUND
        }
    }

    impl SoundMaker for Cow {
        fn make_sound(&self) -> Result<tenet::Sound, tenet::CapabilityError> {
            Ok(tenet::Sound("Moo"))
        }
    }

    let mut builder: RegistryBuilder<dyn SoundMaker> = Registry::builder();
    builder.insert("dog", |()| Box::new(Dog) as Box<dyn SoundMaker>).unwrap();
    builder.insert("cat", |()| Box::new(Cat) as Box<dyn SoundMaker>).unwrap();
    builder.insert("cow", |()| Box::new(Cow) as Box<dyn SoundMaker>).unwrap();
    let registry = builder.build();

    let sounds: Vec<String> = registry
        .names()
        .map(|name| registry.get(name).unwrap().make_sound().unwrap().to_string())
        .collect();
    assert_eq!(sounds, ["Meow", "Moo", "Bark"]);
}
