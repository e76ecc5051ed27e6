//! Walk through the standard variants from the command line.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tenet::{
    Amount, Document, Fax, Keys, Variant,
    consumers::{Checkout, DataLayer, OfficeUser, make_animal_sound},
    observe::Observed,
    orders::{Order, OrderDesk},
    standard,
    variants::{BasicPrinter, ConsoleMailer, FlatbedScanner, MultiFunctionMachine},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tenet")]
#[command(about = "Bind a variant, call it through its contract.")]
struct CommandLine {
    /// Path to the connection keys file
    #[arg(long, short, global = true, default_value = "keys.toml")]
    config: PathBuf,

    /// Log debug output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered variants
    Variants,
    /// Connect to a data store (`mongodb` or `postgres`)
    #[command(alias = "c")]
    Connect { store: String },
    /// Process a payment, e.g. `pay paypal 100` or `pay card 12.34`
    #[command(alias = "p")]
    Pay {
        processor: String,
        #[arg(value_parser = parse_amount)]
        amount: Amount,
    },
    /// Make animals sound off; all of them when none is named
    Sound { animals: Vec<String> },
    /// Print and scan a document, then fax it from the machine that can
    Office {
        #[arg(long, default_value = "quarterly report")]
        title: String,
        #[arg(long, default_value = "555-0100")]
        fax: String,
    },
    /// Place an order, charge it and send a confirmation
    Order {
        #[arg(long, default_value_t = 12345)]
        id: u64,
        #[arg(long, default_value = "John Doe")]
        customer: String,
        #[arg(long, default_value = "johndoe@example.com")]
        email: String,
        #[arg(long, default_value = "paypal")]
        processor: String,
        #[arg(long, value_parser = parse_amount, default_value = "100")]
        total: Amount,
    },
}

fn parse_amount(raw: &str) -> Result<Amount, String> {
    let digits = raw.strip_prefix('$').unwrap_or(raw);
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() || !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid amount `{raw}`"));
    }
    let cents = match frac.as_bytes() {
        [] => 0,
        [tens] => u64::from(tens - b'0') * 10,
        [tens, ones] => u64::from(tens - b'0') * 10 + u64::from(ones - b'0'),
        _ => return Err(format!("too many decimal places in `{raw}`")),
    };
    // Only digits remain, so a parse failure means the value overflowed.
    whole
        .parse::<u64>()
        .ok()
        .and_then(Amount::checked_dollars)
        .and_then(|dollars| dollars.checked_add(Amount::cents(cents)))
        .ok_or_else(|| format!("amount `{raw}` is too large"))
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tenet=debug,tenet_std=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Variants => {
            println!("connectors: {:?}", standard::connectors());
            println!("payments:   {:?}", standard::payments());
            println!("animals:    {:?}", standard::animals());
            Ok(())
        }
        Commands::Connect { store } => {
            let keys = Keys::load(&cli.config)
                .with_context(|| format!("loading keys from {}", cli.config.display()))?;
            let connector = standard::connectors().resolve(&store, keys.connection_for(&store)?)?;
            let mut data = DataLayer::new(Observed::new(connector));
            data.open().await?;
            Ok(())
        }
        Commands::Pay { processor, amount } => {
            let checkout = Checkout::new(standard::payments().get(&processor)?);
            let receipt = checkout.pay(amount)?;
            println!("{receipt}");
            Ok(())
        }
        Commands::Sound { animals } => {
            let registry = standard::animals();
            let names: Vec<String> = if animals.is_empty() {
                registry.names().map(str::to_string).collect()
            } else {
                animals
            };
            for name in names {
                let animal = registry.get(&name)?;
                println!("{}: {}", animal.name(), make_animal_sound(animal.as_ref())?);
            }
            Ok(())
        }
        Commands::Office { title, fax } => {
            let document = Document::new(title, "");

            let separate = OfficeUser::new(BasicPrinter, FlatbedScanner);
            let (printed, scanned) = separate.do_task(&document).into_result()?;
            println!("{printed}\n{scanned}");

            let machine = Arc::new(MultiFunctionMachine);
            let shared = OfficeUser::new(machine.clone(), machine.clone());
            let (printed, scanned) = shared.do_task(&document).into_result()?;
            println!("{printed}\n{scanned}");

            if !machine.supports(tenet::Capability::Fax) {
                bail!("{} cannot fax", machine.name());
            }
            println!("{}", machine.fax(&document, &fax)?);
            Ok(())
        }
        Commands::Order {
            id,
            customer,
            email,
            processor,
            total,
        } => {
            let desk = OrderDesk::new(standard::payments().get(&processor)?, ConsoleMailer);
            let mut order = Order::new(id, customer, total);
            let confirmation = desk.checkout(&mut order, &email)?;
            println!("{}", confirmation.receipt);
            println!("{}", confirmation.delivery);
            println!("order {} is {}", order.id(), order.status());
            Ok(())
        }
    }
}
