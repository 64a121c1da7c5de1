//! Display-only model parameters shown in the settings drawer.
//!
//! Nothing downstream consumes these values; they exist so the drawer has
//! real state to adjust.

pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 1.0);
pub const TOP_P_RANGE: (f64, f64) = (0.0, 1.0);
pub const MAX_TOKENS_RANGE: (u32, u32) = (100, 4000);

const UNIT_STEP: f64 = 0.1;
const MAX_TOKENS_STEP: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 1000,
        }
    }
}

/// Rows of the settings drawer, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Temperature,
    TopP,
    MaxTokens,
    ClearHistory,
}

impl SettingField {
    pub const ALL: [SettingField; 4] = [
        SettingField::Temperature,
        SettingField::TopP,
        SettingField::MaxTokens,
        SettingField::ClearHistory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingField::Temperature => "Temperature",
            SettingField::TopP => "Top P",
            SettingField::MaxTokens => "Max Tokens",
            SettingField::ClearHistory => "Clear Chat History",
        }
    }

    pub fn is_action(self) -> bool {
        matches!(self, SettingField::ClearHistory)
    }

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl ModelParameters {
    /// Builds parameters with every value clamped into its range.
    pub fn new(temperature: f64, top_p: f64, max_tokens: u32) -> Self {
        Self {
            temperature: clamp_unit(temperature, TEMPERATURE_RANGE),
            top_p: clamp_unit(top_p, TOP_P_RANGE),
            max_tokens: clamp_tokens(max_tokens),
        }
    }

    /// Moves `field` by `steps` increments, saturating at the range ends.
    /// Returns whether the value changed.
    pub fn adjust(&mut self, field: SettingField, steps: i32) -> bool {
        let before = *self;
        match field {
            SettingField::Temperature => {
                self.temperature = step_unit(self.temperature, steps, TEMPERATURE_RANGE);
            }
            SettingField::TopP => {
                self.top_p = step_unit(self.top_p, steps, TOP_P_RANGE);
            }
            SettingField::MaxTokens => {
                let delta = steps as i64 * MAX_TOKENS_STEP as i64;
                let next = (self.max_tokens as i64 + delta).max(0) as u32;
                self.max_tokens = clamp_tokens(next);
            }
            SettingField::ClearHistory => {}
        }
        *self != before
    }

    pub fn display_value(&self, field: SettingField) -> String {
        match field {
            SettingField::Temperature => format!("{:.1}", self.temperature),
            SettingField::TopP => format!("{:.1}", self.top_p),
            SettingField::MaxTokens => self.max_tokens.to_string(),
            SettingField::ClearHistory => String::new(),
        }
    }

    /// Position of `field` within its range as a fraction, for slider bars.
    pub fn fraction(&self, field: SettingField) -> Option<f64> {
        let fraction = match field {
            SettingField::Temperature => {
                (self.temperature - TEMPERATURE_RANGE.0) / (TEMPERATURE_RANGE.1 - TEMPERATURE_RANGE.0)
            }
            SettingField::TopP => (self.top_p - TOP_P_RANGE.0) / (TOP_P_RANGE.1 - TOP_P_RANGE.0),
            SettingField::MaxTokens => {
                (self.max_tokens - MAX_TOKENS_RANGE.0) as f64
                    / (MAX_TOKENS_RANGE.1 - MAX_TOKENS_RANGE.0) as f64
            }
            SettingField::ClearHistory => return None,
        };
        Some(fraction.clamp(0.0, 1.0))
    }
}

// Values are kept on the 0.1 grid so repeated steps don't accumulate drift.
fn step_unit(value: f64, steps: i32, range: (f64, f64)) -> f64 {
    let tenths = (value / UNIT_STEP).round() + steps as f64;
    clamp_unit(tenths * UNIT_STEP, range)
}

fn clamp_unit(value: f64, (min, max): (f64, f64)) -> f64 {
    let clamped = if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    };
    (clamped * 10.0).round() / 10.0
}

fn clamp_tokens(value: u32) -> u32 {
    value.clamp(MAX_TOKENS_RANGE.0, MAX_TOKENS_RANGE.1)
}
