//! Any variant can stand in for another behind the same contract.

use tenet::{
    Amount, CapabilityError, PaymentProcessor, Receipt, Sound, SoundMaker, Unbound, Variant,
    consumers::{Checkout, make_animal_sound},
    observe::Observed,
    variants::{
        BasicProcessor, CardProcessor, Cat, Dog, GenericAnimal, PaypalProcessor, StripeProcessor,
    },
};

fn all_processors() -> Vec<Box<dyn PaymentProcessor>> {
    vec![
        Box::new(BasicProcessor),
        Box::new(PaypalProcessor),
        Box::new(StripeProcessor),
        Box::new(CardProcessor),
        Box::new(Observed::new(PaypalProcessor)),
    ]
}

#[test]
fn every_processor_returns_a_receipt_for_the_exact_amount() {
    for processor in all_processors() {
        let receipt: Receipt = processor.process_payment(Amount::dollars(100)).unwrap();
        assert_eq!(receipt.amount, Amount::dollars(100), "{}", processor.name());
    }
}

#[test]
fn receipts_name_the_selected_processor() {
    let paypal = Checkout::new(PaypalProcessor).pay(Amount::dollars(100)).unwrap();
    let stripe = Checkout::new(StripeProcessor).pay(Amount::dollars(100)).unwrap();

    assert_eq!(paypal.to_string(), "Processing payment of $100 via PayPal");
    assert_eq!(stripe.to_string(), "Processing payment of $100 via Stripe");
}

#[test]
fn second_payment_is_independent_of_the_first() {
    let checkout = Checkout::new(PaypalProcessor);

    let first = checkout.pay(Amount::dollars(100)).unwrap();
    let second = checkout.pay(Amount::dollars(50)).unwrap();

    assert_eq!(first.to_string(), "Processing payment of $100 via PayPal");
    assert_eq!(second.to_string(), "Processing payment of $50 via PayPal");
}

#[test]
fn same_caller_different_animals() {
    assert_eq!(make_animal_sound(&GenericAnimal).unwrap(), "Animal sound");
    assert_eq!(make_animal_sound(&Dog).unwrap(), "Bark");
    assert_eq!(make_animal_sound(&Cat).unwrap(), "Meow");
}

#[test]
fn generic_caller_accepts_any_sound_maker() {
    fn chorus<A: SoundMaker, B: SoundMaker>(a: A, b: B) -> Vec<Sound> {
        vec![a.make_sound().unwrap(), b.make_sound().unwrap()]
    }

    assert_eq!(chorus(Dog, Cat), [Sound("Bark"), Sound("Meow")]);
    assert_eq!(chorus(Cat, Observed::new(Dog)), [Sound("Meow"), Sound("Bark")]);
}

#[test]
fn unbound_never_silently_succeeds() {
    let err = make_animal_sound(&Unbound).unwrap_err();
    assert!(matches!(
        err,
        CapabilityError::NotImplemented {
            contract: "SoundMaker",
            operation: "make_sound"
        }
    ));

    let err = Checkout::new(Unbound).pay(Amount::dollars(1)).unwrap_err();
    assert!(err.is_not_implemented());
}
