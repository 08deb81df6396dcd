use prometheus_client::{
    encoding::text::encode,
    metrics::{
        counter::Counter,
        family::Family,
        histogram::{Histogram, exponential_buckets},
    },
    registry::Registry,
};
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct CommandLabels {
    pub command: String,
    pub status: Status,
}

fn duration_histogram() -> Histogram {
    Histogram::new(exponential_buckets(0.005, 2.0, 12))
}

#[derive(Clone, Debug)]
pub struct Metrics {
    commands: Family<CommandLabels, Counter>,
    duration: Family<CommandLabels, Histogram>,
    cards_generated: Counter,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            commands: Family::default(),
            duration: Family::new_with_constructor(duration_histogram),
            cards_generated: Counter::default(),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "bot_commands",
            "Chat commands handled, by command and outcome",
            self.commands.clone(),
        );
        registry.register(
            "bot_command_duration_seconds",
            "Time spent handling a chat command",
            self.duration.clone(),
        );
        registry.register(
            "cards_generated",
            "Card records handed out to users",
            self.cards_generated.clone(),
        );
    }

    pub fn record(&self, command: &str, status: Status, elapsed: f64) {
        let labels = CommandLabels {
            command: command.to_string(),
            status,
        };

        self.commands.get_or_create(&labels).inc();
        self.duration.get_or_create(&labels).observe(elapsed);
    }

    pub fn add_generated(&self, count: usize) {
        self.cards_generated.inc_by(count as u64);
    }

    pub fn generated_total(&self) -> u64 {
        self.cards_generated.get()
    }

    /// Reads a command counter without registering an empty series for it.
    pub fn command_total(&self, command: &str, status: Status) -> u64 {
        let labels = CommandLabels {
            command: command.to_string(),
            status,
        };

        self.commands
            .get(&labels)
            .map(|counter| counter.get())
            .unwrap_or(0)
    }
}

pub fn render_registry(registry: &Registry) -> Result<String, std::fmt::Error> {
    let mut buffer = String::new();
    encode(&mut buffer, registry)?;
    Ok(buffer)
}
