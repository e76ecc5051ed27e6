//! Callers depend only on the narrow contracts they use.

use std::sync::{Arc, Mutex};
use tenet::{
    Capabilities, Capability, Fax, Printer, Scanner, Variant,
    consumers::OfficeUser,
    variants::{BasicPrinter, FlatbedScanner, MultiFunctionMachine},
};

mod common;
use common::{OrderedScanner, SpoolPrinter, memo};

#[test]
fn office_user_runs_with_print_only_and_scan_only_devices() {
    let printer = SpoolPrinter::default();
    let order = Arc::new(Mutex::new(Vec::new()));
    let scanner = OrderedScanner {
        id: 1,
        order: order.clone(),
    };

    let user = OfficeUser::new(printer.clone(), scanner);
    let report = user.do_task(&memo());

    assert!(report.is_complete());
    assert_eq!(*printer.spooled.lock().unwrap(), vec!["memo".to_string()]);
    assert_eq!(*order.lock().unwrap(), vec![1]);
}

#[test]
fn print_runs_before_scan() {
    // A printer that logs into the same order list as the scanner.
    #[derive(Clone)]
    struct OrderedPrinter(Arc<Mutex<Vec<usize>>>);

    impl Variant for OrderedPrinter {
        fn name(&self) -> &'static str {
            "ordered printer"
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::PRINT
        }
    }

    impl Printer for OrderedPrinter {
        fn print(&self, document: &tenet::Document) -> Result<tenet::Job, tenet::CapabilityError> {
            self.0.lock().unwrap().push(0);
            BasicPrinter.print(document)
        }
    }

    let order = Arc::new(Mutex::new(Vec::new()));
    let user = OfficeUser::new(
        OrderedPrinter(order.clone()),
        OrderedScanner {
            id: 1,
            order: order.clone(),
        },
    );
    user.do_task(&memo());

    assert_eq!(*order.lock().unwrap(), vec![0, 1]);
}

#[test]
fn multi_function_machine_fills_both_roles() {
    let machine = Arc::new(MultiFunctionMachine);
    let user = OfficeUser::new(machine.clone(), machine.clone());

    let (printed, scanned) = user.do_task(&memo()).into_result().unwrap();
    assert_eq!(printed.device, "multi-function machine");
    assert_eq!(scanned.device, "multi-function machine");

    // Faxing stays available to callers that ask for it.
    assert!(machine.supports(Capability::Fax));
    assert!(machine.fax(&memo(), "555-0100").is_ok());
}

#[test]
fn borrowed_devices_bind_without_moving() {
    let printer = SpoolPrinter::default();
    let scanner = FlatbedScanner;

    {
        let user = OfficeUser::new(&printer, &scanner);
        assert!(user.do_task(&memo()).is_complete());
    }

    // Still owned here after the borrowed binding ends.
    assert_eq!(*printer.spooled.lock().unwrap(), vec!["memo".to_string()]);
    assert_eq!(scanner.name(), "flatbed scanner");
}

#[test]
fn capability_flags_match_implemented_contracts() {
    assert!(BasicPrinter.supports(Capability::Print));
    assert!(!BasicPrinter.supports(Capability::Fax));
    assert!(FlatbedScanner.supports(Capability::Scan));
    assert!(!FlatbedScanner.supports(Capability::Print));
    assert!(
        MultiFunctionMachine.supports(Capabilities::PRINT | Capabilities::SCAN | Capabilities::FAX)
    );

    fn scan_with(scanner: &dyn Scanner) -> bool {
        scanner.scan(&memo()).is_ok()
    }
    assert!(scan_with(&FlatbedScanner));
    assert!(scan_with(&MultiFunctionMachine));
}
