use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, WriteStyle};
use log::{debug, trace, LevelFilter};

use estimator::api::FieldName;
use estimator::client::Client;
use estimator::controller::{FormController, SubmitOutcome};
use estimator::form::DEFAULT_FIELDS;
use estimator::reveal::{Intersection, RevealStyle};
use estimator::settings::Settings;
use estimator::validation::FieldStyle;
use estimator::view::{ButtonState, Element, View};

#[derive(Parser)]
#[command(about = "Ask the house price backend for an estimate")]
struct Args {
    #[command(subcommand)]
    command: Commands,
    /// Base URL of the prediction backend
    #[arg(short, long)]
    url: Option<String>,
    /// Settings file, defaults to ./estimator.toml when present
    #[arg(short, long)]
    config: Option<String>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
#[derive(Subcommand)]
enum Commands {
    Predict {
        #[arg(long)]
        bedrooms: String,
        #[arg(long)]
        bathrooms: String,
        #[arg(long)]
        sqft_living: String,
        #[arg(long)]
        sqft_lot: String,
        #[arg(long)]
        floors: String,
        #[arg(long)]
        waterfront: String,
        #[arg(long)]
        condition: String,
    },
    Health,
    Fields,
}

/// Writes results to stdout as plain text.
#[derive(Default)]
struct TerminalView {
    markup: String,
}
impl View for TerminalView {
    fn set_button(&mut self, state: ButtonState) {
        if state.disabled() {
            eprintln!("{}", state.label());
        }
    }
    fn set_result_markup(&mut self, markup: String) {
        self.markup = markup;
    }
    fn set_result_visible(&mut self, visible: bool) {
        if visible {
            println!("{}", text_content(&self.markup));
        }
    }
    fn scroll_into_view(&mut self, element: Element) {
        trace!("Scrolling to {:?}", element);
    }
    fn set_field_style(&mut self, field: FieldName, style: FieldStyle) {
        trace!("{} styled {:?}", field, style);
    }
    fn clear_fields(&mut self) {}
    fn set_reveal_style(&mut self, element: Element, style: RevealStyle) {
        trace!("{:?} opacity {}", element, style.opacity);
    }
}

/// Text of an HTML fragment, one line per non-empty text run.
fn text_content(markup: &str) -> String {
    let mut lines = vec![];
    let mut inside_tag = false;
    let mut current = String::new();
    for c in markup.chars() {
        match c {
            '<' => {
                inside_tag = true;
                lines.push(std::mem::take(&mut current));
            }
            '>' => inside_tag = false,
            c if !inside_tag => current.push(c),
            _ => {}
        }
    }
    lines.push(current);
    lines
        .iter()
        .map(|line| {
            line.trim()
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&quot;", "\"")
                .replace("&#39;", "'")
                .replace("&amp;", "&")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `--url` wins over every settings layer.
fn backend_url(flag: Option<String>, settings: &Settings) -> String {
    flag.unwrap_or_else(|| settings.url.clone())
}

/// Fills the form the way a user would and submits it once. Errors when no
/// price was rendered, which makes the binary exit non-zero.
async fn predict(client: Client, values: [(FieldName, String); 7]) -> Result<f64> {
    let mut controller = FormController::new(Box::new(client), Box::<TerminalView>::default());
    controller.on_load();
    controller.on_intersection(&[Intersection {
        element: Element::FormContainer,
        is_intersecting: true,
    }]);
    for (field, value) in values {
        if controller.on_input(field, &value) == FieldStyle::Invalid {
            if let Some(spec) = controller.spec(field) {
                eprintln!(
                    "warning: {} = {} is outside {}..={}",
                    field, value, spec.min, spec.max
                );
            }
        }
    }
    match controller.on_submit().await {
        SubmitOutcome::Rendered(price) => {
            debug!("Estimated price {}", price);
            Ok(price)
        }
        SubmitOutcome::Failed => bail!("prediction failed"),
        SubmitOutcome::Ignored => bail!("a prediction is still pending"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Args::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    let level = match cli.verbose {
        0 => settings.level_filter()?,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::default()
        .filter_level(level)
        .write_style(WriteStyle::Always)
        .init();
    let url = backend_url(cli.url, &settings);
    let client = Client::with_timeout(url, settings.timeout())?;
    debug!("Using backend at {}", client.url());

    match cli.command {
        Commands::Predict {
            bedrooms,
            bathrooms,
            sqft_living,
            sqft_lot,
            floors,
            waterfront,
            condition,
        } => {
            predict(
                client,
                [
                    (FieldName::Bedrooms, bedrooms),
                    (FieldName::Bathrooms, bathrooms),
                    (FieldName::SqftLiving, sqft_living),
                    (FieldName::SqftLot, sqft_lot),
                    (FieldName::Floors, floors),
                    (FieldName::Waterfront, waterfront),
                    (FieldName::Condition, condition),
                ],
            )
            .await?;
        }
        Commands::Health => {
            let health = client.health().await?;
            println!("{}", health);
        }
        Commands::Fields => {
            for spec in DEFAULT_FIELDS {
                println!(
                    "{:<12} {:?}\t{} ..= {}",
                    spec.name.as_str(),
                    spec.kind(),
                    spec.min,
                    spec.max
                );
            }
        }
    }
    Ok(())
}
