use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payment_params::application::builder::ParamBuilder;
use payment_params::domain::params::ParamMap;
use payment_params::domain::ports::DeviceIdentityProviderBox;
use payment_params::domain::record::{BankAccount, Card, PaymentRecord};
use payment_params::infrastructure::fixed::FixedDeviceIdentity;
use payment_params::infrastructure::platform::{DEFAULT_PACKAGE_IDENTIFIER, PlatformDeviceIdentity};
use payment_params::interfaces::csv::record_reader::RecordReader;
use payment_params::interfaces::json::params_writer::ParamsWriter;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    identity: IdentityArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Build card token parameters from a CSV file of cards
    Card {
        /// Input cards CSV file
        input: PathBuf,
    },
    /// Build bank account token parameters from a CSV file of bank accounts
    BankAccount {
        /// Input bank accounts CSV file
        input: PathBuf,
    },
}

#[derive(Args)]
struct IdentityArgs {
    /// Device identifier to fingerprint with. Defaults to the host machine id.
    #[arg(long, global = true, env = "PAYMENT_PARAMS_DEVICE_ID")]
    device_id: Option<String>,

    /// Package identifier of the calling application
    #[arg(
        long,
        global = true,
        env = "PAYMENT_PARAMS_PACKAGE",
        default_value = DEFAULT_PACKAGE_IDENTIFIER
    )]
    package: String,
}

impl IdentityArgs {
    fn into_provider(self) -> DeviceIdentityProviderBox {
        match self.device_id {
            Some(device_id) => Box::new(FixedDeviceIdentity::new(device_id, self.package)),
            None => Box::new(PlatformDeviceIdentity::new(self.package)),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let builder = ParamBuilder::new(cli.identity.into_provider());

    let stdout = io::stdout();
    let mut writer = ParamsWriter::new(stdout.lock());

    match cli.command {
        Command::Card { input } => {
            process::<Card, _>(&builder, input, &mut writer)?;
        }
        Command::BankAccount { input } => {
            process::<BankAccount, _>(&builder, input, &mut writer)?;
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

fn process<T, W>(builder: &ParamBuilder, input: PathBuf, writer: &mut ParamsWriter<W>) -> Result<()>
where
    T: DeserializeOwned + Into<PaymentRecord>,
    W: io::Write,
{
    let file = File::open(input).into_diagnostic()?;
    let reader = RecordReader::<_, T>::new(file);
    for (row, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                let params: ParamMap = builder.params(&record.into());
                writer.write_params(&params).into_diagnostic()?;
            }
            Err(e) => {
                tracing::warn!(row = row + 1, "Error reading record: {}", e);
            }
        }
    }
    Ok(())
}
